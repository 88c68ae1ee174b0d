//! Title and URL formatting for tree nodes.

/// Route namespace used when none is configured.
pub const DEFAULT_URL_PREFIX: &str = "/experiments/";

/// Remove the trailing extension (everything after the last `.`).
///
/// ```
/// use vitro_tree::format::strip_extension;
///
/// assert_eq!(strip_extension("button.vitro.tsx"), "button.vitro");
/// assert_eq!(strip_extension("README"), "README");
/// ```
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(index) => &name[..index],
        None => name,
    }
}

/// Extensions of modules an experiment can be written in.
const MODULE_EXTENSIONS: &[&str] = &[".tsx", ".ts", ".jsx", ".js"];

/// Remove a trailing JS/TS module extension, leaving other extensions alone.
///
/// ```
/// use vitro_tree::format::strip_module_extension;
///
/// assert_eq!(strip_module_extension("button.vitro.tsx"), "button.vitro");
/// assert_eq!(strip_module_extension("changelog.mdx"), "changelog.mdx");
/// ```
pub fn strip_module_extension(name: &str) -> &str {
    MODULE_EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
        .unwrap_or(name)
}

/// Does ordering key `key` select the entry called `name`?
///
/// The key may omit the entry's last extension (`"intro"` selects
/// `"intro.mdx"`), and JS/TS module extensions are interchangeable on both
/// sides (`"button.tsx"` selects `"button.jsx"`). Two names that only share
/// a stem never match: `"v1.0"` does not select `"v1.1"`.
pub fn equal_without_extension(key: &str, name: &str) -> bool {
    key == name
        || key == strip_extension(name)
        || strip_module_extension(key) == strip_module_extension(name)
}

/// Build the display title of a path segment.
///
/// ```
/// use vitro_tree::format::format_title;
///
/// assert_eq!(format_title("my_component.tsx"), "My Component");
/// assert_eq!(format_title("anAwesomeStory.story"), "An Awesome Story");
/// ```
pub fn format_title(segment: &str) -> String {
    start_case(strip_extension(segment.trim()))
}

/// Split `input` into words and capitalize the first letter of each.
pub fn start_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() && is_word_boundary(chars[i - 1], c, chars.get(i + 1).copied()) {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn is_word_boundary(prev: char, c: char, next: Option<char>) -> bool {
    if prev.is_numeric() != c.is_numeric() {
        return true;
    }
    if prev.is_lowercase() && c.is_uppercase() {
        return true;
    }
    // acronym followed by a capitalized word: "XMLParser" -> "XML Parser"
    prev.is_uppercase() && c.is_uppercase() && next.is_some_and(|n| n.is_lowercase())
}

/// Build the route of a leaf from its full partial path.
///
/// The trailing extension and a trailing `index` segment are removed and the
/// remainder is appended to `prefix`.
///
/// ```
/// use vitro_tree::format::format_url;
///
/// assert_eq!(format_url("a/two.tsx", "/experiments/"), "/experiments/a/two");
/// assert_eq!(format_url("docs/index.mdx", "/experiments/"), "/experiments/docs");
/// assert_eq!(format_url("index.tsx", "/experiments/"), "/experiments/");
/// ```
pub fn format_url(path: &str, prefix: &str) -> String {
    let route = strip_index_segment(strip_url_extension(path));
    format!("{prefix}{route}")
}

fn strip_url_extension(path: &str) -> &str {
    match path.rfind('.') {
        Some(index) => {
            let ext = &path[index + 1..];
            if !ext.is_empty() && ext.chars().all(|c| c.is_alphanumeric() || c == '_') {
                &path[..index]
            } else {
                path
            }
        }
        None => path,
    }
}

fn strip_index_segment(path: &str) -> &str {
    if path == "index" {
        ""
    } else {
        path.strip_suffix("/index").unwrap_or(path)
    }
}

/// Normalize a route namespace so it starts and ends with `/`.
pub fn normalize_url_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}
