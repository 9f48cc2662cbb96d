//! # Actions
//!
//! Everything that can happen in the browser becomes an `Action`.
//! The catalog arrives? That's `Action::CatalogLoaded(catalog)`.
//! User picks a category? That's `Action::SelectCategory(key)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing any I/O the adapter must perform. No side effects
//! here. Time is passed in through the actions that need it.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::time::Instant;

use log::{debug, info, warn};

use crate::Lang;
use crate::catalog::{Catalog, CatalogError};
use crate::core::clipboard::ClipboardError;
use crate::core::state::{App, LoadStatus, Notification, NotificationLevel, Selection};

#[derive(Debug)]
pub enum Action {
    CatalogLoaded(Catalog),
    CatalogFailed { error: CatalogError, at: Instant },
    SelectCategory(String),
    SelectComponent(String),
    ToggleLanguage,
    SetLanguage(Lang),
    SetQuery(String),
    CopyCode,
    CopySucceeded { at: Instant },
    CopyFailed { error: ClipboardError, at: Instant },
    /// Clears notifications and labels whose time is up.
    Tick(Instant),
    Quit,
}

/// I/O requested by `update()`, carried out by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    CopyToClipboard(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::CatalogLoaded(catalog) => {
            let category = app
                .initial_category
                .as_deref()
                .filter(|key| catalog.contains_category(key))
                .or_else(|| catalog.first_category_key())
                .map(str::to_string);
            let component = category
                .as_deref()
                .and_then(|key| catalog.category(key))
                .and_then(|c| c.first_component())
                .map(|c| c.id.clone());
            info!(
                "Catalog ready: {} categories, default selection {:?}/{:?}",
                catalog.len(),
                category,
                component
            );
            app.selection = Selection {
                category,
                component,
            };
            app.catalog = Some(catalog);
            app.status = LoadStatus::Ready;
            Effect::None
        }
        Action::CatalogFailed { error, at } => {
            warn!("Catalog load failed: {}", error);
            if app.catalog.is_none() {
                app.status = LoadStatus::Failed(error.to_string());
            }
            app.notification = Some(Notification::new(
                app.language.pick("加载组件数据失败", "Failed to load component data"),
                NotificationLevel::Error,
                at,
            ));
            Effect::None
        }
        Action::SelectCategory(key) => {
            let Some(catalog) = app.catalog.as_ref() else {
                debug!("Ignoring category selection '{}': no catalog", key);
                return Effect::None;
            };
            let Some(category) = catalog.category(&key) else {
                warn!("Ignoring selection of unknown category '{}'", key);
                return Effect::None;
            };
            app.selection.component = category.first_component().map(|c| c.id.clone());
            app.selection.category = Some(key);
            Effect::None
        }
        Action::SelectComponent(id) => {
            if app.catalog.is_none() {
                debug!("Ignoring component selection '{}': no catalog", id);
                return Effect::None;
            }
            app.selection.component = Some(id);
            Effect::None
        }
        Action::ToggleLanguage => {
            app.language = app.language.toggle();
            Effect::None
        }
        Action::SetLanguage(lang) => {
            app.language = lang;
            Effect::None
        }
        Action::SetQuery(query) => {
            app.query = query;
            Effect::None
        }
        Action::CopyCode => match app.current_component() {
            Some(component) => Effect::CopyToClipboard(component.code_example.clone()),
            None => Effect::None,
        },
        Action::CopySucceeded { at } => {
            app.copied_at = Some(at);
            app.notification = Some(Notification::new(
                app.language
                    .pick("代码已复制到剪贴板！", "Code copied to clipboard!"),
                NotificationLevel::Success,
                at,
            ));
            Effect::None
        }
        Action::CopyFailed { error, at } => {
            warn!("Copy failed: {}", error);
            app.notification = Some(Notification::new(
                app.language.pick("复制失败！", "Copy failed!"),
                NotificationLevel::Error,
                at,
            ));
            Effect::None
        }
        Action::Tick(now) => {
            if app.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
                app.notification = None;
            }
            if !app.recently_copied(now) {
                app.copied_at = None;
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryRecord;
    use crate::core::state::NOTIFICATION_TTL;
    use crate::test_support::{component, loaded_app, sample_catalog};
    use indexmap::IndexMap;

    #[test]
    fn test_load_selects_first_category_and_component() {
        let app = loaded_app();
        assert_eq!(app.status, LoadStatus::Ready);
        assert_eq!(app.selection.category.as_deref(), Some("basic"));
        assert_eq!(app.current_component().map(|c| c.id.as_str()), Some("button"));
    }

    #[test]
    fn test_load_honours_initial_category() {
        let mut app = App::new(Lang::En, Some("layout".to_string()));
        update(&mut app, Action::CatalogLoaded(sample_catalog()));
        assert_eq!(app.selection.category.as_deref(), Some("layout"));
        assert_eq!(app.current_component().map(|c| c.id.as_str()), Some("grid"));
    }

    #[test]
    fn test_load_ignores_unknown_initial_category() {
        let mut app = App::new(Lang::Zh, Some("nope".to_string()));
        update(&mut app, Action::CatalogLoaded(sample_catalog()));
        assert_eq!(app.selection.category.as_deref(), Some("basic"));
    }

    #[test]
    fn test_select_category_resets_component() {
        let mut app = loaded_app();
        update(&mut app, Action::SelectComponent("input".to_string()));
        assert_eq!(app.current_component().map(|c| c.id.as_str()), Some("input"));

        update(&mut app, Action::SelectCategory("layout".to_string()));
        let current = app.current_component().unwrap();
        assert_eq!(current.id, "grid");
        assert_eq!(current.category, "layout");
    }

    #[test]
    fn test_select_empty_category_clears_component() {
        let mut app = loaded_app();
        let effect = update(&mut app, Action::SelectCategory("empty".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.selection.category.as_deref(), Some("empty"));
        assert!(app.selection.component.is_none());
        assert!(app.current_component().is_none());
    }

    #[test]
    fn test_select_unknown_category_is_ignored() {
        let mut app = loaded_app();
        let before = app.selection.clone();
        update(&mut app, Action::SelectCategory("missing".to_string()));
        assert_eq!(app.selection, before);
    }

    #[test]
    fn test_selection_unavailable_while_loading() {
        let mut app = App::default();
        update(&mut app, Action::SelectCategory("basic".to_string()));
        update(&mut app, Action::SelectComponent("button".to_string()));
        assert_eq!(app.selection, Selection::default());
    }

    #[test]
    fn test_every_category_selects_its_first_component() {
        let mut app = loaded_app();
        let catalog = sample_catalog();
        for (key, category) in catalog.categories() {
            update(&mut app, Action::SelectCategory(key.to_string()));
            match category.first_component() {
                Some(first) => {
                    let current = app.current_component().unwrap();
                    assert_eq!(current.id, first.id);
                    assert_eq!(current.category, key);
                }
                None => assert!(app.current_component().is_none()),
            }
        }
    }

    #[test]
    fn test_failed_load_leaves_catalog_unset() {
        let mut app = App::default();
        let now = Instant::now();
        update(
            &mut app,
            Action::CatalogFailed {
                error: CatalogError::Network("connection refused".to_string()),
                at: now,
            },
        );
        assert!(app.catalog.is_none());
        assert_eq!(app.load_error(), Some("network error: connection refused"));
        assert_eq!(
            app.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Error)
        );
    }

    #[test]
    fn test_failed_reload_keeps_previous_catalog() {
        let mut app = loaded_app();
        update(
            &mut app,
            Action::CatalogFailed {
                error: CatalogError::Parse("eof".to_string()),
                at: Instant::now(),
            },
        );
        assert!(app.catalog.is_some());
        assert_eq!(app.status, LoadStatus::Ready);
        assert!(app.load_error().is_none());
        assert_eq!(app.current_component().map(|c| c.id.as_str()), Some("button"));
    }

    #[test]
    fn test_reload_replaces_catalog_wholesale() {
        let mut app = loaded_app();
        update(&mut app, Action::SelectCategory("layout".to_string()));

        let mut categories = IndexMap::new();
        categories.insert(
            "feedback".to_string(),
            CategoryRecord {
                title: "Feedback".to_string(),
                components: vec![component("modal", "feedback"), component("alert", "feedback")],
            },
        );
        let replacement = Catalog::new(categories).unwrap();
        update(&mut app, Action::CatalogLoaded(replacement));

        let catalog = app.catalog.as_ref().unwrap();
        assert_eq!(catalog.category_keys().collect::<Vec<_>>(), vec!["feedback"]);
        assert!(!catalog.contains_category("basic"));
        assert!(catalog.find_component("button").is_none());
        assert_eq!(app.selection.category.as_deref(), Some("feedback"));
        assert_eq!(app.selection.component.as_deref(), Some("modal"));
        assert_eq!(app.status, LoadStatus::Ready);
    }

    #[test]
    fn test_copy_code_requests_clipboard() {
        let mut app = loaded_app();
        let effect = update(&mut app, Action::CopyCode);
        assert_eq!(
            effect,
            Effect::CopyToClipboard("<Button type=\"primary\">主要按钮</Button>".to_string())
        );
    }

    #[test]
    fn test_copy_code_without_component_is_noop() {
        let mut app = loaded_app();
        update(&mut app, Action::SelectCategory("empty".to_string()));
        assert_eq!(update(&mut app, Action::CopyCode), Effect::None);
    }

    #[test]
    fn test_copy_feedback_is_localized_and_transient() {
        let mut app = loaded_app();
        app.language = Lang::En;
        let now = Instant::now();
        update(&mut app, Action::CopySucceeded { at: now });
        assert!(app.recently_copied(now));
        assert_eq!(
            app.notification.as_ref().map(|n| n.message.as_str()),
            Some("Code copied to clipboard!")
        );

        update(&mut app, Action::Tick(now + NOTIFICATION_TTL));
        assert!(app.notification.is_none());
        assert!(app.copied_at.is_none());
    }

    #[test]
    fn test_copy_failure_only_notifies() {
        let mut app = loaded_app();
        let selection = app.selection.clone();
        let now = Instant::now();
        update(
            &mut app,
            Action::CopyFailed {
                error: ClipboardError::Unavailable("no terminal".to_string()),
                at: now,
            },
        );
        assert_eq!(app.selection, selection);
        assert!(app.copied_at.is_none());
        assert_eq!(
            app.notification.as_ref().map(|n| n.message.as_str()),
            Some("复制失败！")
        );
    }

    #[test]
    fn test_language_toggle_keeps_query() {
        let mut app = loaded_app();
        update(&mut app, Action::SetQuery("按钮".to_string()));
        assert_eq!(app.visible_components().len(), 1);

        update(&mut app, Action::ToggleLanguage);
        assert_eq!(app.language, Lang::En);
        assert_eq!(app.query, "按钮");
        assert!(app.visible_components().is_empty());

        update(&mut app, Action::SetLanguage(Lang::Zh));
        assert_eq!(app.visible_components().len(), 1);
    }

    #[test]
    fn test_quit() {
        let mut app = loaded_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
