use std::fmt::{self, Write as _};

use askama_escape::{escape as escape_html, Html};

/// Adapts a byte buffer to [fmt::Write] so the escaper can write straight into it.
struct ByteSink<'a>(&'a mut Vec<u8>);

impl fmt::Write for ByteSink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.extend_from_slice(s.as_bytes());
        return Ok(());
    }
}

/// Appends `text` to `out`, replacing `& < > " '` with entity references.
pub(crate) fn escape_into(text: &str, out: &mut Vec<u8>) {
    out.reserve(text.len());
    // ByteSink::write_str never fails, so neither does the escaper writing into it.
    let _ = write!(ByteSink(out), "{}", escape_html(text, Html));
}

/// Escapes `text` into a freshly allocated byte vector.
pub fn escape(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    escape_into(text, &mut out);
    return out;
}

#[cfg(test)]
fn unescape(text: &str) -> String {
    // Ampersand last, so that "&amp;lt;" decodes to "&lt;" and not "<".
    const REFERENCES: [(&str, &str); 5] = [
        ("&#x27;", "'"),
        ("&quot;", "\""),
        ("&gt;", ">"),
        ("&lt;", "<"),
        ("&amp;", "&"),
    ];
    let mut result = text.to_owned();
    for (reference, source) in REFERENCES {
        result = result.replace(reference, source);
    }
    result
}
