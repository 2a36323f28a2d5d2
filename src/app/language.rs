use std::path::Path;

/// Language tag attached to a tab, chosen from the file extension.
///
/// Detection is total: every path (or none at all) maps to a tag, with
/// `Plaintext` as the fallback for unknown or missing extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    Html,
    Css,
    Javascript,
    Typescript,
    Python,
    Json,
    Markdown,
    #[default]
    Plaintext,
}

impl Language {
    /// The wire/display identifier for this language.
    pub fn id(&self) -> &'static str {
        match self {
            Language::Html => "html",
            Language::Css => "css",
            Language::Javascript => "javascript",
            Language::Typescript => "typescript",
            Language::Python => "python",
            Language::Json => "json",
            Language::Markdown => "markdown",
            Language::Plaintext => "plaintext",
        }
    }

    /// Token handed to syntect's syntax lookup. None means no highlighting.
    pub fn syntax_token(&self) -> Option<&'static str> {
        match self {
            Language::Html => Some("html"),
            Language::Css => Some("css"),
            Language::Javascript => Some("js"),
            Language::Typescript => Some("ts"),
            Language::Python => Some("py"),
            Language::Json => Some("json"),
            Language::Markdown => Some("md"),
            Language::Plaintext => None,
        }
    }

    /// Only HTML documents feed the preview pane.
    pub fn is_previewable(&self) -> bool {
        matches!(self, Language::Html)
    }

    pub fn from_extension(ext: &str) -> Language {
        match ext.to_lowercase().as_str() {
            "html" | "htm" => Language::Html,
            "css" | "scss" | "sass" | "less" => Language::Css,
            "js" | "jsx" | "mjs" => Language::Javascript,
            "ts" | "tsx" => Language::Typescript,
            "py" | "pyw" => Language::Python,
            "json" | "jsonc" => Language::Json,
            "md" | "mdx" => Language::Markdown,
            _ => Language::Plaintext,
        }
    }

    pub fn from_path(path: &Path) -> Language {
        path.extension()
            .and_then(|e| e.to_str())
            .map(Language::from_extension)
            .unwrap_or(Language::Plaintext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(Language::from_path(Path::new("index.html")), Language::Html);
        assert_eq!(Language::from_path(Path::new("style.SCSS")), Language::Css);
        assert_eq!(Language::from_path(Path::new("app.mjs")), Language::Javascript);
        assert_eq!(Language::from_path(Path::new("lib.tsx")), Language::Typescript);
        assert_eq!(Language::from_path(Path::new("app.py")), Language::Python);
        assert_eq!(Language::from_path(Path::new("data.jsonc")), Language::Json);
        assert_eq!(Language::from_path(Path::new("notes.mdx")), Language::Markdown);
    }

    #[test]
    fn test_unknown_extension_is_plaintext() {
        assert_eq!(Language::from_path(Path::new("notes.xyz")), Language::Plaintext);
    }

    #[test]
    fn test_missing_extension_is_plaintext() {
        assert_eq!(Language::from_path(Path::new("README")), Language::Plaintext);
        assert_eq!(Language::from_path(Path::new("")), Language::Plaintext);
        assert_eq!(Language::from_path(Path::new(".bashrc")), Language::Plaintext);
    }

    #[test]
    fn test_only_html_previews() {
        assert!(Language::Html.is_previewable());
        assert!(!Language::Css.is_previewable());
        assert!(!Language::Markdown.is_previewable());
    }

    #[test]
    fn test_ids() {
        assert_eq!(Language::Plaintext.id(), "plaintext");
        assert_eq!(Language::Typescript.id(), "typescript");
    }
}
