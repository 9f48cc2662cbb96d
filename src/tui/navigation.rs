//! Arrow-key stepping through the sidebar lists.
//!
//! Both helpers read the current `App` and return the key or id to select,
//! or `None` when the selection would not change. The caller turns the
//! result into a `SelectCategory` / `SelectComponent` action.

use crate::core::state::App;

/// Category `delta` steps away from the selected one, clamped to the ends.
pub fn step_category(app: &App, delta: isize) -> Option<String> {
    let catalog = app.catalog.as_ref()?;
    let keys: Vec<&str> = catalog.category_keys().collect();
    let current = app
        .selection
        .category
        .as_deref()
        .and_then(|key| keys.iter().position(|k| *k == key));
    let target = match current {
        Some(i) => clamp_step(i, delta, keys.len()),
        None => 0,
    };
    let key = keys.get(target)?;
    (Some(*key) != app.selection.category.as_deref()).then(|| key.to_string())
}

/// Visible component `delta` steps away from the selected one. When the
/// selected component is hidden by the search filter, the first visible one
/// is chosen.
pub fn step_component(app: &App, delta: isize) -> Option<String> {
    let visible = app.visible_components();
    let current = app
        .selection
        .component
        .as_deref()
        .and_then(|id| visible.iter().position(|c| c.id == id));
    let target = match current {
        Some(i) => clamp_step(i, delta, visible.len()),
        None => 0,
    };
    let component = visible.get(target)?;
    (Some(component.id.as_str()) != app.selection.component.as_deref())
        .then(|| component.id.clone())
}

fn clamp_step(index: usize, delta: isize, len: usize) -> usize {
    index
        .saturating_add_signed(delta)
        .min(len.saturating_sub(1))
}
