use std::collections::HashMap;

use fltk::enums::{Color, Font};
use fltk::text::StyleTableEntry;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Color as SyntectColor, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::error::AppError;
use super::language::Language;
use super::settings::EditorTheme;

/// Maps syntect RGB colors to FLTK style characters ('A', 'B', 'C', ...),
/// building the StyleTableEntry table as new colors are encountered.
pub struct StyleMap {
    color_to_char: HashMap<(u8, u8, u8), char>,
    entries: Vec<StyleTableEntry>,
    font: Font,
    font_size: i32,
}

impl StyleMap {
    pub fn new(font: Font, font_size: i32) -> Self {
        let mut map = Self {
            color_to_char: HashMap::new(),
            entries: Vec::new(),
            font,
            font_size,
        };
        // 'A' is the default/fallback style (plain foreground)
        map.entries.push(StyleTableEntry {
            color: Color::Foreground,
            font,
            size: font_size,
        });
        map.color_to_char.insert((0, 0, 0), 'A');
        map
    }

    pub fn get_or_insert(&mut self, color: SyntectColor) -> char {
        let key = (color.r, color.g, color.b);
        if let Some(&ch) = self.color_to_char.get(&key) {
            return ch;
        }

        let idx = self.entries.len();
        // Style chars go 'A'..'Z'; 26 colors is plenty for one theme
        if idx >= 26 {
            return (b'A' + 25) as char;
        }
        let ch = (b'A' + idx as u8) as char;
        self.entries.push(StyleTableEntry {
            color: Color::from_rgb(color.r, color.g, color.b),
            font: self.font,
            size: self.font_size,
        });
        self.color_to_char.insert(key, ch);
        ch
    }

    pub fn entries(&self) -> Vec<StyleTableEntry> {
        self.entries.clone()
    }

    pub fn update_font(&mut self, font: Font, size: i32) {
        self.font = font;
        self.font_size = size;
        for entry in &mut self.entries {
            entry.font = font;
            entry.size = size;
        }
    }
}

/// The language-intelligence half of the embedded widget: turns document text
/// into a per-byte style string for FLTK's highlight data.
///
/// Construction can fail (missing syntax or theme assets); callers fall back
/// to degraded plain-text editing in that case.
pub struct HighlightEngine {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_key: &'static str,
    style_map: StyleMap,
}

impl HighlightEngine {
    pub fn new(theme: EditorTheme, font: Font, font_size: i32) -> Result<Self, AppError> {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let theme_set = ThemeSet::load_defaults();
        let theme_key = theme.syntax_theme_key();
        if !theme_set.themes.contains_key(theme_key) {
            return Err(AppError::WidgetUnavailable(format!(
                "syntax theme {:?} not bundled",
                theme_key
            )));
        }
        if syntax_set.syntaxes().is_empty() {
            return Err(AppError::WidgetUnavailable(
                "no syntax definitions bundled".to_string(),
            ));
        }
        Ok(Self {
            syntax_set,
            theme_set,
            theme_key,
            style_map: StyleMap::new(font, font_size),
        })
    }

    pub fn set_theme(&mut self, theme: EditorTheme, font: Font, font_size: i32) {
        self.theme_key = theme.syntax_theme_key();
        self.style_map = StyleMap::new(font, font_size);
    }

    pub fn update_font(&mut self, font: Font, size: i32) {
        self.style_map.update_font(font, size);
    }

    /// One style char per byte of `text`. Unknown languages style everything
    /// as plain foreground.
    pub fn style_string(&mut self, text: &str, language: Language) -> String {
        let syntax = language
            .syntax_token()
            .and_then(|token| self.syntax_set.find_syntax_by_token(token));

        let syntax = match syntax {
            Some(s) => s,
            None => return "A".repeat(text.len()),
        };

        let theme = &self.theme_set.themes[self.theme_key];
        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut style_string = String::with_capacity(text.len());

        for line in LinesWithEndings::from(text) {
            let regions = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_default();
            for (style, piece) in regions {
                let ch = self.style_map.get_or_insert(style.foreground);
                // One style char per byte (not per char) for UTF-8 correctness
                for _ in 0..piece.len() {
                    style_string.push(ch);
                }
            }
        }

        style_string
    }

    pub fn style_table(&self) -> Vec<StyleTableEntry> {
        self.style_map.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> HighlightEngine {
        HighlightEngine::new(EditorTheme::SilverGold, Font::Courier, 14).unwrap()
    }

    #[test]
    fn test_style_string_covers_every_byte() {
        let mut e = engine();
        let text = "<p class=\"x\">héllo</p>\n";
        let styles = e.style_string(text, Language::Html);
        assert_eq!(styles.len(), text.len());
    }

    #[test]
    fn test_plaintext_is_all_default_style() {
        let mut e = engine();
        let styles = e.style_string("no markup here\n", Language::Plaintext);
        assert!(styles.chars().all(|c| c == 'A'));
    }

    #[test]
    fn test_html_produces_multiple_styles() {
        let mut e = engine();
        let styles = e.style_string("<html><body><p>x</p></body></html>\n", Language::Html);
        let distinct: std::collections::HashSet<char> = styles.chars().collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_style_table_has_default_entry() {
        let e = engine();
        let table = e.style_table();
        assert!(!table.is_empty());
        assert_eq!(table[0].size, 14);
    }
}
