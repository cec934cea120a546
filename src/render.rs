//! src/render.rs
//!
//! Presentation layer: in-terminal diagram and browser map.

pub mod diagram;
pub mod map;

pub use diagram::{Diagram, render_diagram};
pub use map::{Browser, SystemBrowser, render_map};
