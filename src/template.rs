//! Template files and `{{ name }}` placeholder expansion
//!
//! The changelog is built from two small templates kept next to the
//! artifacts, created with default bodies on first use so they can be
//! edited afterwards. Expansion is pure named-placeholder substitution;
//! a placeholder with no bound variable is a hard error so a typo in an
//! edited template cannot silently produce a broken document.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{GlogError, Result, file_read_failed, file_write_failed};

/// Default release block header
pub const DEFAULT_HEADER_TEMPLATE: &str = "\n---\n# {{ title }}\n\nVersion: {{ version_number }} \
                                           | {{ date }} | Build: {{ build_number }}\n\n\
                                           CONTRIBUTORS: {{ contributors }}\n";

/// Default per-kind section; `artifact_list` is the pre-rendered bullet
/// lines for one kind
pub const DEFAULT_SECTION_TEMPLATE: &str =
    "\n## [ {{ artifact_type }} ]\n\n{{ artifact_list }}\n";

#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder pattern is valid")
});

/// A loaded template, with its origin path kept for error reporting
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
    path: PathBuf,
}

impl Template {
    /// Load a template file, writing `default_body` first when the file
    /// does not exist yet.
    pub fn load_or_init(path: &Path, default_body: &str) -> Result<Self> {
        if !path.exists() {
            fs::write(path, default_body)
                .map_err(|e| file_write_failed(path.display(), e.to_string()))?;
        }
        let text = fs::read_to_string(path)
            .map_err(|e| file_read_failed(path.display(), e.to_string()))?;
        Ok(Self {
            text,
            path: path.to_path_buf(),
        })
    }

    /// Build a template from a string, for rendering without a backing file
    #[cfg(test)]
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            path: PathBuf::from("<inline>"),
        }
    }

    /// Expand every `{{ name }}` placeholder from `vars`.
    pub fn render(&self, vars: &HashMap<&str, String>) -> Result<String> {
        let mut out = String::with_capacity(self.text.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(&self.text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            out.push_str(&self.text[last..whole.start()]);
            match vars.get(name.as_str()) {
                Some(value) => out.push_str(value),
                None => {
                    return Err(GlogError::UnknownTemplateVariable {
                        name: name.as_str().to_string(),
                        path: self.path.display().to_string(),
                    });
                }
            }
            last = whole.end();
        }
        out.push_str(&self.text[last..]);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn vars(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let template = Template::from_text("# {{ title }}\nVersion: {{ version_number }}\n");
        let out = template
            .render(&vars(&[("title", "GSLogger"), ("version_number", "1.2.3")]))
            .unwrap();
        assert_eq!(out, "# GSLogger\nVersion: 1.2.3\n");
    }

    #[test]
    fn test_render_tolerates_spacing_variants() {
        let template = Template::from_text("{{title}} {{  title  }} {{ title }}");
        let out = template.render(&vars(&[("title", "x")])).unwrap();
        assert_eq!(out, "x x x");
    }

    #[test]
    fn test_render_same_variable_twice() {
        let template = Template::from_text("{{ a }}-{{ a }}");
        let out = template.render(&vars(&[("a", "1")])).unwrap();
        assert_eq!(out, "1-1");
    }

    #[test]
    fn test_unknown_variable_is_hard_error() {
        let template = Template::from_text("hello {{ nobody }}");
        let err = template.render(&vars(&[("title", "x")])).unwrap_err();
        match err {
            GlogError::UnknownTemplateVariable { name, .. } => assert_eq!(name, "nobody"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_text_without_placeholders_passes_through() {
        let template = Template::from_text("plain text, no variables");
        let out = template.render(&HashMap::new()).unwrap();
        assert_eq!(out, "plain text, no variables");
    }

    #[test]
    fn test_load_or_init_creates_default_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("template_header.md");

        let template = Template::load_or_init(&path, DEFAULT_HEADER_TEMPLATE).unwrap();
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_HEADER_TEMPLATE);

        // Renders with the documented header variables
        let out = template
            .render(&vars(&[
                ("title", "App"),
                ("version_number", "0.1.0"),
                ("date", "2026-08-07"),
                ("build_number", "2"),
                ("contributors", "alice"),
            ]))
            .unwrap();
        assert!(out.contains("# App"));
        assert!(out.contains("Version: 0.1.0 | 2026-08-07 | Build: 2"));
    }

    #[test]
    fn test_load_or_init_keeps_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("template_header.md");
        fs::write(&path, "custom {{ title }}").unwrap();

        let template = Template::load_or_init(&path, DEFAULT_HEADER_TEMPLATE).unwrap();
        let out = template.render(&vars(&[("title", "X")])).unwrap();
        assert_eq!(out, "custom X");
    }
}
