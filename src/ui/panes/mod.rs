//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: The array snapshot drawn as bars with operation highlights
//! - [`info`]: Algorithm title plus element count, speed, seed and step counter
//! - [`status`]: Status bar with keybindings and transport state
//!
//! Each pane module exports a `render_*` function taking a `*RenderData`
//! struct; panes hold no state of their own.

pub mod bars;
pub mod info;
pub mod status;

// Re-export render functions for convenience
pub use bars::{render_bars_pane, BarsRenderData};
pub use info::{render_info_pane, render_title_pane, InfoRenderData};
pub use status::{render_status_bar, StatusRenderData};
