//! Template engine for rendering generated files
//!
//! Wraps a strict liquid parser: unknown variables are render errors rather
//! than silently empty output.

use crate::error::{Result, TemplatingError};
use liquid::model::{Object, Value};

/// Template engine with Liquid configuration
pub struct TemplateEngine {
    parser: liquid::Parser,
}

impl TemplateEngine {
    /// Create a new template engine with the liquid standard library
    pub fn new() -> Result<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| TemplatingError::Parse(e.to_string()))?;
        Ok(Self { parser })
    }

    /// Render a template string against `globals`
    pub fn render(&self, template_str: &str, globals: &Object) -> Result<String> {
        let template = self
            .parser
            .parse(template_str)
            .map_err(|e| TemplatingError::Parse(e.to_string()))?;

        template.render(globals).map_err(|e| {
            tracing::debug!("template render failed: {}", e);
            TemplatingError::Render(e.to_string())
        })
    }
}

/// Build a liquid object from string pairs
pub fn object_from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, String)>) -> Object {
    let mut object = Object::new();
    for (key, value) in pairs {
        object.insert(key.to_string().into(), Value::scalar(value));
    }
    object
}
