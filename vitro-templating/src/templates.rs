//! Built-in templates for the preview app and the values they are rendered with.

use crate::engine::{object_from_pairs, TemplateEngine};
use crate::error::Result;
use liquid::model::{Object, Value};

/// Wrapper page rendered for every experiment file
pub const PAGE_TEMPLATE: &str = r#"import React from 'react'
import * as exported from '{{ import_path }}'
{% if wrapper_import != "" -%}
import { default as GlobalWrapper } from '{{ wrapper_import }}'
{%- else -%}
const GlobalWrapper = React.Fragment
{%- endif %}
import experimentsTree from '@/experimentsTree.json'
import { ExperimentPage } from '@vitro/ui/src'

const absolutePath = '{{ absolute_path }}'

export default function Page() {
    return (
        <ExperimentPage
            experimentsTree={experimentsTree}
            GlobalWrapper={GlobalWrapper}
            absolutePath={absolutePath}
            fileExports={exported}
        />
    )
}
"#;

/// Module mapping experiment paths to their absolute source path
pub const EXPERIMENTS_MAP_TEMPLATE: &str = r#"module.exports = {
{%- for entry in entries %}
    '{{ entry.key }}': '{{ entry.absolute_path }}',
{%- endfor %}
}
"#;

/// `package.json` of the preview app
pub const PACKAGE_JSON_TEMPLATE: &str = r#"{
    "name": "vitro-app",
    "version": "{{ version }}",
    "private": true,
    "scripts": {
        "dev": "next dev",
        "build": "next build"
    },
    "dependencies": {
        "@vitro/ui": "^{{ version }}",
        "next": "^14.2.0",
        "react": "^18.2.0",
        "react-dom": "^18.2.0"
    }
}
"#;

/// `.gitignore` of the preview app
pub const GITIGNORE_TEMPLATE: &str = "node_modules\n.next\n{{ pages_dir }}\nexperimentsTree.json\nexperimentsMap.js\n";

/// Values of one generated experiment page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// Import specifier of the experiment module
    pub import_path: String,
    /// Import specifier of the global wrapper, if any
    pub wrapper_import: Option<String>,
    /// Absolute path of the experiment source file
    pub absolute_path: String,
}

impl PageContext {
    /// Context for the experiment at `relative_path` (relative to the
    /// project root) in an app `app_depth` directories below the root.
    pub fn new(
        relative_path: &str,
        absolute_path: impl Into<String>,
        wrapper_component_path: Option<&str>,
        app_depth: usize,
    ) -> Self {
        Self {
            import_path: module_import_path(relative_path, app_depth),
            wrapper_import: wrapper_component_path.map(|path| module_import_path(path, app_depth)),
            absolute_path: absolute_path.into(),
        }
    }

    fn to_object(&self) -> Object {
        object_from_pairs([
            ("import_path", js_string(&self.import_path)),
            (
                "wrapper_import",
                self.wrapper_import
                    .as_deref()
                    .map(js_string)
                    .unwrap_or_default(),
            ),
            ("absolute_path", js_string(&self.absolute_path)),
        ])
    }
}

/// Render the page of one experiment
pub fn render_page(engine: &TemplateEngine, context: &PageContext) -> Result<String> {
    engine.render(PAGE_TEMPLATE, &context.to_object())
}

/// Render `experimentsMap.js` from `(relative path, absolute path)` pairs
pub fn render_experiments_map<'a>(
    engine: &TemplateEngine,
    entries: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<String> {
    let entries: Vec<Value> = entries
        .into_iter()
        .map(|(relative, absolute)| {
            Value::Object(object_from_pairs([
                ("key", js_string(strip_module_extension(relative))),
                ("absolute_path", js_string(absolute)),
            ]))
        })
        .collect();

    let mut globals = Object::new();
    globals.insert("entries".into(), Value::Array(entries));
    engine.render(EXPERIMENTS_MAP_TEMPLATE, &globals)
}

/// Render the app `package.json` for CLI `version`
pub fn render_package_json(engine: &TemplateEngine, version: &str) -> Result<String> {
    engine.render(
        PACKAGE_JSON_TEMPLATE,
        &object_from_pairs([("version", version.to_string())]),
    )
}

/// Render the app `.gitignore`
pub fn render_gitignore(engine: &TemplateEngine, pages_dir: &str) -> Result<String> {
    engine.render(
        GITIGNORE_TEMPLATE,
        &object_from_pairs([("pages_dir", pages_dir.trim_matches('/').to_string())]),
    )
}

/// Import specifier of a project file as seen from the preview app.
///
/// `@` resolves to the app directory, so the specifier climbs `app_depth`
/// levels back to the project root. The module extension is dropped.
///
/// ```
/// use vitro_templating::module_import_path;
///
/// assert_eq!(module_import_path("src/button.vitro.tsx", 1), "@/../src/button.vitro");
/// assert_eq!(module_import_path("./Wrapper.jsx", 2), "@/../../Wrapper");
/// ```
pub fn module_import_path(relative_path: &str, app_depth: usize) -> String {
    let relative = relative_path.trim_start_matches("./").trim_start_matches('/');
    format!(
        "@/{}{}",
        "../".repeat(app_depth),
        strip_module_extension(relative)
    )
}

/// Drop the extension of the last path segment, if it has one.
pub fn strip_module_extension(path: &str) -> &str {
    let file_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[file_start..].rfind('.') {
        Some(dot) if dot > 0 => &path[..file_start + dot],
        _ => path,
    }
}

/// Escape a value for a single-quoted JavaScript string literal.
pub fn js_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
