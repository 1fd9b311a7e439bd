use std::fmt;
use std::sync::Arc;

use super::{Fragment, Node};

/// Text, escaped when rendered.
pub fn text(text: &str) -> Fragment {
    if text.is_empty() {
        return Fragment::empty();
    }
    return Fragment::from_node(Node::Text(Arc::from(text)));
}

/// Text that is already safe markup, written as is.
pub fn preescaped_text(text: &str) -> Fragment {
    return unsafe_bytes(text.as_bytes());
}

/// The escaped [fmt::Display] form of `v`.
pub fn string(v: &impl fmt::Display) -> Fragment {
    return text(&v.to_string());
}

/// The escaped [fmt::Debug] form of `v`.
pub fn debug(v: &impl fmt::Debug) -> Fragment {
    return text(&format!("{:?}", v));
}

/// Bytes written verbatim, with no escaping and no validation.
///
/// Nothing stops these bytes from breaking the document, or from being invalid UTF-8;
/// that is the caller's responsibility.
pub fn unsafe_bytes(bytes: &[u8]) -> Fragment {
    if bytes.is_empty() {
        return Fragment::empty();
    }
    return Fragment::from_node(Node::Raw(Arc::from(bytes)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(text("a < b & c").to_string(), "a &lt; b &amp; c");
    }

    #[test]
    fn test_raw_bypasses_escaping() {
        assert_eq!(preescaped_text("<b>").to_string(), "<b>");
        assert_eq!(unsafe_bytes(b"<b>").to_string(), "<b>");
    }

    #[test]
    fn test_string_and_debug() {
        assert_eq!(string(&3.5).to_string(), "3.5");
        assert_eq!(string(&'<').to_string(), "&lt;");
        assert_eq!(debug(&"a").to_string(), "&quot;a&quot;");
        assert_eq!(debug(&Some(1)).to_string(), "Some(1)");
    }

    #[test]
    fn test_empty_input_is_empty_fragment() {
        assert!(text("").is_empty());
        assert!(preescaped_text("").is_empty());
        assert!(unsafe_bytes(b"").is_empty());
    }
}
