//! Display-facing output of the engine.
//!
//! - [`viewmodel`]: the [`TableView`] handed to the presentation layer
//! - [`renderer`]: plain-text pagination strip rendering

pub mod renderer;
pub mod viewmodel;

pub use renderer::{render_footer, render_strip};
pub use viewmodel::TableView;
