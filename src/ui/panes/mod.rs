//! TUI pane rendering modules
//!
//! Stateless render functions for everything visible on screen:
//!
//! - [`visualizer`]: one pane per algorithm — input line, the current
//!   snapshot as role-colored value blocks with arrow markers, and the
//!   insertion-key readout
//! - [`status`]: status bar with keybindings and navigation state
//!
//! Each function takes a [`Frame`](ratatui::Frame), the target area, and
//! plain data; no pane owns any state of its own.

pub mod status;
pub mod visualizer;

// Re-export render functions for convenience
pub use status::render_status_bar;
pub use visualizer::render_visualizer_pane;
