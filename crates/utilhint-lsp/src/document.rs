use tower_lsp::lsp_types::{Position, Range};

/// Represents an open document in the LSP server
pub struct Document {
    /// The current text content of the document
    text: String,
    /// Lines of the document (cached for position calculations)
    lines: Vec<String>,
    /// Language id reported by the client on open
    language_id: String,
    version: i32,
}

impl Document {
    pub fn new(text: String, language_id: String, version: i32) -> Self {
        let lines = text.lines().map(|s| s.to_string()).collect();

        Self {
            text,
            lines,
            language_id,
            version,
        }
    }

    pub fn update_text(&mut self, new_text: String, version: i32) {
        self.lines = new_text.lines().map(|s| s.to_string()).collect();
        self.text = new_text;
        self.version = version;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    /// Get the word touching a position, along with its range.
    ///
    /// The cursor may sit on any character of the word or directly after its
    /// last character. Columns are UTF-16 code units, as in LSP positions.
    pub fn word_at_position(&self, position: Position) -> Option<(Range, String)> {
        let line_text = self.lines.get(position.line as usize)?;
        let chars: Vec<char> = line_text.chars().collect();
        let cursor = char_index(&chars, position.character)?;

        // Find start of word
        let mut start = cursor;
        while start > 0 && is_word_char(chars[start - 1]) {
            start -= 1;
        }

        // Find end of word
        let mut end = cursor;
        while end < chars.len() && is_word_char(chars[end]) {
            end += 1;
        }

        if start == end {
            return None;
        }

        let range = Range::new(
            Position::new(position.line, utf16_len(&chars[..start])),
            Position::new(position.line, utf16_len(&chars[..end])),
        );
        Some((range, chars[start..end].iter().collect()))
    }
}

/// Map a UTF-16 column to a char index; `None` past the end of the line
fn char_index(chars: &[char], column: u32) -> Option<usize> {
    let mut units = 0u32;
    for (idx, c) in chars.iter().enumerate() {
        if units >= column {
            return Some(idx);
        }
        units += c.len_utf16() as u32;
    }
    (units >= column).then_some(chars.len())
}

fn utf16_len(chars: &[char]) -> u32 {
    chars.iter().map(|c| c.len_utf16() as u32).sum()
}

/// Identifier characters of JavaScript/TypeScript
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document::new(text.to_string(), "javascript".to_string(), 1)
    }

    fn word(doc: &Document, line: u32, character: u32) -> Option<String> {
        doc.word_at_position(Position::new(line, character))
            .map(|(_, w)| w)
    }

    #[test]
    fn test_word_in_middle() {
        let d = doc("const s = toTitleCase(name);");
        assert_eq!(word(&d, 0, 14), Some("toTitleCase".to_string()));
    }

    #[test]
    fn test_word_range() {
        let d = doc("utils.clamp(x, 0, 1)");
        let (range, w) = d.word_at_position(Position::new(0, 8)).unwrap();
        assert_eq!(w, "clamp");
        assert_eq!(range, Range::new(Position::new(0, 6), Position::new(0, 11)));
    }

    #[test]
    fn test_word_at_start_and_just_after_end() {
        let d = doc("merge(a, b)");
        assert_eq!(word(&d, 0, 0), Some("merge".to_string()));
        assert_eq!(word(&d, 0, 5), Some("merge".to_string()));
    }

    #[test]
    fn test_dollar_and_underscore_are_word_chars() {
        let d = doc("let $el_1 = 0;");
        assert_eq!(word(&d, 0, 6), Some("$el_1".to_string()));
    }

    #[test]
    fn test_no_word_on_whitespace() {
        let d = doc("a  =  b");
        assert_eq!(word(&d, 0, 2), None);
    }

    #[test]
    fn test_no_word_past_line_or_document() {
        let d = doc("chunk");
        assert_eq!(word(&d, 0, 40), None);
        assert_eq!(word(&d, 3, 0), None);
        assert_eq!(word(&doc(""), 0, 0), None);
    }

    #[test]
    fn test_multiline() {
        let d = doc("const a = 1;\r\nisPrime(a);");
        assert_eq!(word(&d, 1, 3), Some("isPrime".to_string()));
    }

    #[test]
    fn test_utf16_columns() {
        // the emoji takes two UTF-16 code units
        let d = doc("'😀' + unique(xs)");
        let (range, w) = d.word_at_position(Position::new(0, 8)).unwrap();
        assert_eq!(w, "unique");
        assert_eq!(range.start, Position::new(0, 7));
        assert_eq!(range.end, Position::new(0, 13));
    }

    #[test]
    fn test_update_text() {
        let mut d = doc("old");
        d.update_text("flatten(xs)\nnext".to_string(), 2);
        assert_eq!(d.text(), "flatten(xs)\nnext");
        assert_eq!(word(&d, 1, 0), Some("next".to_string()));
        assert_eq!(d.version(), 2);
        assert_eq!(d.language_id(), "javascript");
        assert_eq!(word(&d, 0, 1), Some("flatten".to_string()));
    }
}
