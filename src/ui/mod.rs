//! Interactive tree viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, line editing
//! - **[`panes`]**: stateless render functions for each visible pane (input,
//!   tree, tokens, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with an initial
//! expression and [`Options`], then call [`App::run`] to start the event loop.
//!
//! [`Options`]: crate::pipeline::Options
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
