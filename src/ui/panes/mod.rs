//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`input`]: Editable expression line
//! - [`tree`]: Indented tree with selection and collapsible nodes
//! - [`tokens`]: Token list with locations
//! - [`status`]: Status bar with keybindings and parse state
//!
//! Each pane module exports a `render_*` function taking the frame, its area,
//! and the slice of application state it draws.

pub mod input;
pub mod status;
pub mod tokens;
pub mod tree;

// Re-export render functions for convenience
pub use input::render_input_pane;
pub use status::{render_status_bar, ParseState};
pub use tokens::render_tokens_pane;
pub use tree::{render_tree_pane, visible_rows, NodePath, TreeRow};
