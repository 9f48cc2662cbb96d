//! # TUI Components
//!
//! UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields and are
//! rebuilt every frame:
//! - `TitleBar`: app title, search field and language hint
//! - `CategoryMenu`, `ComponentList`: the two sidebar lists
//! - `Detail`: header, tabs and the active tab body
//!   (`PreviewPanel`, `CodePanel`, `PropsTable`)
//! - `StatusLine`: notification or key help
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state across frames and emit events:
//! - `SearchBox`: query editor, emits `SearchEvent`
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into `App`.
//!
//! ```rust,ignore
//! // Dependencies are explicit
//! TitleBar::new(app.language, &app.query, tui.search.editing).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (top line)
//! ├── search_box.rs     (query editor state)
//! ├── category_menu.rs  (category sidebar)
//! ├── component_list.rs (filtered component sidebar)
//! ├── detail.rs         (detail pane and tabs)
//! ├── preview_panel.rs  (mock widget preview)
//! ├── code_panel.rs     (highlighted example + usage)
//! ├── props_table.rs    (property table)
//! └── status_line.rs    (bottom line)
//! ```

pub mod category_menu;
pub mod code_panel;
pub mod component_list;
pub mod detail;
pub mod preview_panel;
pub mod props_table;
pub mod search_box;
pub mod status_line;
mod title_bar;

pub use category_menu::CategoryMenu;
pub use component_list::ComponentList;
pub use detail::{Detail, DetailTab};
pub use search_box::{SearchBox, SearchEvent};
pub use status_line::StatusLine;
pub use title_bar::TitleBar;
