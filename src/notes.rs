use crate::error::Result;
use regex::Regex;

/// Everything up to and including this phrase is boilerplate prepended by the
/// release workflow; only the text after it is shown to users.
const RELEASE_INFO_MARKER: &str = "YTLitePlus Release Information";

/// Turns markdown/HTML release notes into the plain text shown in the
/// catalog. The transformations are order-sensitive: markup stripping runs
/// before the literal character replacements.
pub struct NotesSanitizer {
    tag_re: Regex,
    heading_re: Regex,
    bold_re: Regex,
}

impl NotesSanitizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            tag_re: Regex::new(r"<[^<]+?>")?,
            heading_re: Regex::new(r"#{1,6}\s?")?,
            bold_re: Regex::new(r"\*{2}")?,
        })
    }

    pub fn sanitize(&self, raw: &str) -> String {
        let text = match raw.split_once(RELEASE_INFO_MARKER) {
            Some((_, rest)) => rest.trim(),
            None => raw,
        };

        let text = self.tag_re.replace_all(text, "");
        let text = self.heading_re.replace_all(&text, "");
        let text = self.bold_re.replace_all(&text, "");

        // Unconditional replacements: every hyphen becomes a bullet (even
        // inside words and ranges) and every backtick a double quote.
        text.replace('-', "•").replace('`', "\"")
    }
}
