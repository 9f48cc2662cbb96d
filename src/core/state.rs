//! # Application State
//!
//! Core browser state. Domain logic only, no TUI types. Presentation state
//! (focus, scroll offsets, active tab) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Option<Catalog>        // None until the first successful load
//! ├── status: LoadStatus              // Loading → Ready | Failed
//! ├── selection: Selection            // (category key, component id)
//! ├── language: Lang                  // active UI language
//! ├── query: String                   // search box contents
//! ├── notification: Option<...>       // transient toast
//! ├── copied_at: Option<Instant>      // drives the "Copied" button label
//! └── initial_category: Option<String>
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::time::{Duration, Instant};

use crate::Lang;
use crate::catalog::{Catalog, CategoryRecord, ComponentRecord};
use crate::core::filter;

/// How long a notification (and the "Copied" label) stays up.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

/// What is currently displayed. The component, when set, belongs to the
/// category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub category: Option<String>,
    pub component: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel, created_at: Instant) -> Self {
        Self {
            message: message.into(),
            level,
            created_at,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= NOTIFICATION_TTL
    }
}

#[derive(Debug)]
pub struct App {
    pub catalog: Option<Catalog>,
    pub status: LoadStatus,
    pub selection: Selection,
    pub language: Lang,
    pub query: String,
    pub notification: Option<Notification>,
    pub copied_at: Option<Instant>,
    /// Category to open after load instead of the first one, if present.
    pub initial_category: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Lang::default(), None)
    }
}

impl App {
    pub fn new(language: Lang, initial_category: Option<String>) -> Self {
        Self {
            catalog: None,
            status: LoadStatus::Loading,
            selection: Selection::default(),
            language,
            query: String::new(),
            notification: None,
            copied_at: None,
            initial_category,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn current_category(&self) -> Option<&CategoryRecord> {
        let key = self.selection.category.as_deref()?;
        self.catalog.as_ref()?.category(key)
    }

    /// The selected component, looked up within the selected category.
    pub fn current_component(&self) -> Option<&ComponentRecord> {
        let id = self.selection.component.as_deref()?;
        self.current_category()?.component(id)
    }

    /// Components of the selected category that match the search query.
    pub fn visible_components(&self) -> Vec<&ComponentRecord> {
        match self.current_category() {
            Some(category) => filter::filter(&category.components, &self.query, self.language),
            None => Vec::new(),
        }
    }

    /// True while the "Copied" label should be shown.
    pub fn recently_copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < NOTIFICATION_TTL)
    }
}
