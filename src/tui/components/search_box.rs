//! # Search Box
//!
//! Single-line query editor shown in the title bar. Opened with `/`, closed
//! with Enter or Esc. Every edit emits the full query so the core can
//! re-filter.

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

#[derive(Debug, Default)]
pub struct SearchBox {
    pub query: String,
    pub editing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Changed(String),
    Finished,
}

impl SearchBox {
    pub fn start(&mut self) {
        self.editing = true;
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        if !self.editing {
            return None;
        }
        match event {
            TuiEvent::InputChar(c) => {
                self.query.push(*c);
                Some(SearchEvent::Changed(self.query.clone()))
            }
            TuiEvent::Paste(text) => {
                // Single-line field: drop line breaks from pasted text
                self.query
                    .extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
                Some(SearchEvent::Changed(self.query.clone()))
            }
            TuiEvent::Backspace => {
                self.query.pop()?;
                Some(SearchEvent::Changed(self.query.clone()))
            }
            TuiEvent::Submit | TuiEvent::Escape => {
                self.editing = false;
                Some(SearchEvent::Finished)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_input_when_not_editing() {
        let mut search = SearchBox::default();
        assert_eq!(search.handle_event(&TuiEvent::InputChar('a')), None);
        assert!(search.query.is_empty());
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut search = SearchBox::default();
        search.start();
        search.handle_event(&TuiEvent::InputChar('按'));
        assert_eq!(
            search.handle_event(&TuiEvent::InputChar('钮')),
            Some(SearchEvent::Changed("按钮".to_string()))
        );
        assert_eq!(
            search.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::Changed("按".to_string()))
        );
    }

    #[test]
    fn test_backspace_on_empty_is_silent() {
        let mut search = SearchBox::default();
        search.start();
        assert_eq!(search.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut search = SearchBox::default();
        search.start();
        search.handle_event(&TuiEvent::Paste("but\nton\r\n".to_string()));
        assert_eq!(search.query, "button");
    }

    #[test]
    fn test_enter_and_escape_finish() {
        let mut search = SearchBox::default();
        search.start();
        search.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(
            search.handle_event(&TuiEvent::Escape),
            Some(SearchEvent::Finished)
        );
        assert!(!search.editing);
        assert_eq!(search.query, "x");
    }
}
