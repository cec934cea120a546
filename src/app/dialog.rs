//! src/app/dialog.rs
//!
//! Modal message shown after a failed or partially failed action.

use crate::error::{GraphError, MapError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    Error,
    Warning,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn warning(title: &str, message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Warning,
            title: title.to_string(),
            message: message.into(),
        }
    }
}

impl From<&GraphError> for Dialog {
    fn from(err: &GraphError) -> Self {
        match err {
            GraphError::NoPath { .. } => Dialog::warning("No Path", err.to_string()),
            GraphError::Validation(_) | GraphError::Precondition(_) => {
                Dialog::error(err.to_string())
            }
        }
    }
}

impl From<&MapError> for Dialog {
    fn from(err: &MapError) -> Self {
        Dialog::error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_is_a_warning() {
        let d = Dialog::from(&GraphError::NoPath {
            from: "A".into(),
            to: "Z".into(),
        });
        assert_eq!(d.kind, DialogKind::Warning);
        assert_eq!(d.title, "No Path");
        assert_eq!(d.message, "No path found between A and Z.");
    }

    #[test]
    fn validation_is_an_error() {
        let d = Dialog::from(&GraphError::Validation("bad".into()));
        assert_eq!(d, Dialog::error("bad"));
    }
}
