//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod diagram;
pub mod dialog;
pub mod edges;
pub mod form;
pub mod help;
pub mod result;
pub mod selectors;
pub mod title;

pub use diagram::DiagramPanel;
pub use dialog::DialogPanel;
pub use edges::EdgeListPanel;
pub use form::FormPanel;
pub use help::HelpPanel;
pub use result::ResultPanel;
pub use selectors::SelectorPanel;
pub use title::TitlePanel;
