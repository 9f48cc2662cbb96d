//! # Core Application Logic
//!
//! Selection, search and projection logic of the browser.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • filter / props /     │
//!                    │    preview (pure fns)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │    CLI     │
//!             │  Adapter   │          │ subcommands│
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all browser state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`filter`]: Bilingual search over a component list
//! - [`props`]: Property table rows
//! - [`preview`]: Preview strategy registry
//! - [`clipboard`]: Clipboard trait and error
//! - [`config`]: Config file and override resolution

pub mod action;
pub mod clipboard;
pub mod config;
pub mod filter;
pub mod preview;
pub mod props;
pub mod state;
