//! # Vitro Templating
//!
//! Liquid templates for the files `vitro generate` writes into the preview
//! app: one wrapper page per experiment, the experiments map module, and the
//! scaffolding written by `vitro init`.

pub mod engine;
pub mod error;
pub mod templates;

pub use engine::TemplateEngine;
pub use error::{Result, TemplatingError};
pub use templates::{
    js_string, module_import_path, render_experiments_map, render_gitignore, render_package_json,
    render_page, strip_module_extension, PageContext,
};
