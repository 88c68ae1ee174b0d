//! Logging utilities for Vitro
//!
//! Helpers for rendering structured values inside tracing messages.

use serde::Serialize;
use std::fmt::Debug;

/// Wrapper for pretty-printing types in logs as YAML
///
/// Use this in tracing statements to format settings, trees and other
/// serializable values with a newline before the content:
///
/// ```
/// use vitro_common::Pretty;
///
/// #[derive(Debug, serde::Serialize)]
/// struct Settings {
///     port: u16,
/// }
///
/// let rendered = format!("{}", Pretty(&Settings { port: 7007 }));
/// assert_eq!(rendered, "\nport: 7007\n");
/// ```
///
/// Debug output is used as a fallback if YAML serialization fails.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> Pretty<T> {
    fn render(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

impl<T: Serialize + Debug> std::fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.render(f)
    }
}

impl<T: Serialize + Debug> std::fmt::Debug for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.render(f)
    }
}
