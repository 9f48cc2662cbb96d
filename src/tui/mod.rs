//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (loading spinner, notification or "Copied" label up):
//!   draws every ~80ms so timers expire on time.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! ## Key Map
//!
//! | Key            | Effect                                   |
//! |----------------|------------------------------------------|
//! | `↑` / `↓`      | move within the focused list, or scroll  |
//! | `Tab` / `⇧Tab` | cycle focus: categories → list → detail  |
//! | `Enter`        | move focus right                         |
//! | `1` `2` `3`    | preview / code / props tab               |
//! | `/`            | edit the search query                    |
//! | `Esc`          | clear the search query                   |
//! | `c`            | copy the code example                    |
//! | `l`, `Ctrl+L`  | toggle language                          |
//! | `q`, `Ctrl+C`  | quit                                     |

mod clipboard;
mod component;
mod components;
mod event;
mod highlight;
mod navigation;
mod text;
mod ui;

#[cfg(test)]
mod test_util;

use log::{debug, info};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use tui_scrollview::ScrollViewState;

use crate::catalog::CatalogSource;
use crate::core::action::{Action, Effect, update};
use crate::core::clipboard::Clipboard;
use crate::core::config::ResolvedConfig;
use crate::core::preview::PreviewRegistry;
use crate::core::state::App;
use crate::tui::clipboard::TerminalClipboard;
use crate::tui::component::EventHandler;
use crate::tui::components::{DetailTab, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Lines moved per PageUp / PageDown in the detail pane.
const PAGE_STEP: u16 = 10;

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    Categories,
    #[default]
    Components,
    Detail,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Categories => Focus::Components,
            Focus::Components => Focus::Detail,
            Focus::Detail => Focus::Categories,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Categories => Focus::Detail,
            Focus::Components => Focus::Categories,
            Focus::Detail => Focus::Components,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub tab: DetailTab,
    pub search: SearchBox,
    /// Line offset in the preview and props tabs.
    pub detail_offset: u16,
    pub code_scroll: ScrollViewState,
    pub registry: PreviewRegistry,
    /// Component the scroll positions belong to.
    shown_component: Option<String>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::default(),
            tab: DetailTab::default(),
            search: SearchBox::default(),
            detail_offset: 0,
            code_scroll: ScrollViewState::default(),
            registry: PreviewRegistry::default(),
            shown_component: None,
        }
    }

    fn reset_scroll(&mut self) {
        self.detail_offset = 0;
        self.code_scroll = ScrollViewState::default();
    }

    /// Scroll positions start over whenever a different component is shown.
    pub fn sync_selection(&mut self, app: &App) {
        if self.shown_component != app.selection.component {
            self.shown_component = app.selection.component.clone();
            self.reset_scroll();
        }
    }

    fn select_tab(&mut self, tab: DetailTab) {
        if self.tab != tab {
            self.tab = tab;
            self.reset_scroll();
        }
    }

    fn scroll_detail(&mut self, up: bool, lines: u16) {
        if self.tab == DetailTab::Code {
            for _ in 0..lines {
                if up {
                    self.code_scroll.scroll_up();
                } else {
                    self.code_scroll.scroll_down();
                }
            }
        } else if up {
            self.detail_offset = self.detail_offset.saturating_sub(lines);
        } else {
            self.detail_offset = self.detail_offset.saturating_add(lines);
        }
    }
}

/// Translate a terminal event into a core action, updating TUI-local state
/// (focus, tab, scroll, search editing) along the way.
pub fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::ToggleLanguage => return Some(Action::ToggleLanguage),
        TuiEvent::Resize => return None,
        _ => {}
    }

    if tui.search.editing {
        return match tui.search.handle_event(event)? {
            SearchEvent::Changed(query) => Some(Action::SetQuery(query)),
            SearchEvent::Finished => None,
        };
    }

    // Nothing to browse until the catalog is in
    if app.catalog.is_none() {
        return match event {
            TuiEvent::InputChar('q') => Some(Action::Quit),
            TuiEvent::InputChar('l') => Some(Action::ToggleLanguage),
            _ => None,
        };
    }

    match event {
        TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::InputChar('l') => Some(Action::ToggleLanguage),
        TuiEvent::InputChar('c') => Some(Action::CopyCode),
        TuiEvent::InputChar('/') => {
            tui.search.query = app.query.clone();
            tui.search.start();
            None
        }
        TuiEvent::InputChar('1') => {
            tui.select_tab(DetailTab::Preview);
            None
        }
        TuiEvent::InputChar('2') => {
            tui.select_tab(DetailTab::Code);
            None
        }
        TuiEvent::InputChar('3') => {
            tui.select_tab(DetailTab::Props);
            None
        }
        TuiEvent::Escape if !app.query.is_empty() => {
            tui.search.clear();
            Some(Action::SetQuery(String::new()))
        }
        TuiEvent::NextFocus => {
            tui.focus = tui.focus.next();
            None
        }
        TuiEvent::PrevFocus => {
            tui.focus = tui.focus.prev();
            None
        }
        TuiEvent::Submit => {
            if tui.focus != Focus::Detail {
                tui.focus = tui.focus.next();
            }
            None
        }
        TuiEvent::CursorUp | TuiEvent::CursorDown => {
            let up = matches!(event, TuiEvent::CursorUp);
            let delta = if up { -1 } else { 1 };
            match tui.focus {
                Focus::Categories => navigation::step_category(app, delta).map(Action::SelectCategory),
                Focus::Components => {
                    navigation::step_component(app, delta).map(Action::SelectComponent)
                }
                Focus::Detail => {
                    tui.scroll_detail(up, 1);
                    None
                }
            }
        }
        TuiEvent::PageUp | TuiEvent::PageDown => {
            tui.scroll_detail(matches!(event, TuiEvent::PageUp), PAGE_STEP);
            None
        }
        _ => None,
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is harmlessly ignored by terminals that
        // don't support it
        execute!(
            stdout(),
            EnableBracketedPaste,
            Hide,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            Show
        );
    }
}

/// Load the catalog in the background and report the outcome as one action.
pub fn spawn_load(source: Arc<dyn CatalogSource>, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        info!("Loading catalog from {}", source.name());
        let action = match source.load_catalog().await {
            Ok(catalog) => Action::CatalogLoaded(catalog),
            Err(error) => Action::CatalogFailed {
                error,
                at: Instant::now(),
            },
        };
        // Receiver is gone only if the UI already quit
        let _ = tx.send(action);
    });
}

/// Apply an action and carry out the effect it asks for. Returns true when
/// the app should quit.
fn dispatch(app: &mut App, action: Action, clipboard: &mut dyn Clipboard) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::Quit => true,
        Effect::CopyToClipboard(code) => {
            let at = Instant::now();
            let outcome = match clipboard.copy(&code) {
                Ok(()) => Action::CopySucceeded { at },
                Err(error) => Action::CopyFailed { error, at },
            };
            update(app, outcome) == Effect::Quit
        }
    }
}

pub fn run(config: ResolvedConfig, source: Arc<dyn CatalogSource>) -> std::io::Result<()> {
    let mut app = App::new(config.language, config.initial_category.clone());
    let mut tui = TuiState::new();
    let mut clipboard = TerminalClipboard::stdout();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    spawn_load(source, tx);

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        let now = Instant::now();
        update(&mut app, Action::Tick(now));

        // Background results
        for action in rx.try_iter() {
            debug!("Background action: {:?}", action);
            update(&mut app, action);
            needs_redraw = true;
        }
        tui.sync_selection(&app);

        let animating =
            app.is_loading() || app.notification.is_some() || app.copied_at.is_some();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(&app, &mut tui, &event) {
                should_quit |= dispatch(&mut app, action, &mut clipboard);
            }
            tui.sync_selection(&app);
        }

        if should_quit {
            info!("Quit requested");
            break Ok(());
        }
    };

    ratatui::restore();
    result
}
