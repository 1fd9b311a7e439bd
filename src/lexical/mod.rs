//! Precomputed, reusable chunks of output.
//!
//! Escaping happens once, when the wrapper is built. Afterwards the bytes are never scanned
//! again, so a [Tag] kept in a `lazy_static` costs nothing extra per use.

use std::fmt;
use std::sync::Arc;

use crate::builder::escape;

/// Builds one shared chunk from several byte slices.
pub(crate) fn chunk_of(parts: &[&[u8]]) -> Arc<[u8]> {
    return Arc::from(parts.concat());
}

macro_rules! lexical_wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        pub struct $name(Arc<[u8]>);

        impl $name {
            /// Escapes `text` once and keeps the result.
            pub fn new(text: &str) -> Self {
                return $name(Arc::from(escape(text)));
            }

            /// Keeps `text` as is.
            ///
            /// The caller guarantees the text cannot break the output syntax; nothing is
            /// checked.
            pub fn preescaped(text: &str) -> Self {
                return $name(Arc::from(text.as_bytes()));
            }

            /// Joins two chunks without escaping either again.
            pub fn concat(&self, other: &$name) -> Self {
                return $name(chunk_of(&[self.as_bytes(), other.as_bytes()]));
            }

            pub fn as_bytes(&self) -> &[u8] {
                return &self.0;
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                return write!(f, "{}({:?})", stringify!($name), String::from_utf8_lossy(&self.0));
            }
        }
    };
}

lexical_wrapper!(
    /// The name of an element (`p`, `/p`) or of an attribute key (`src`).
    Tag
);

lexical_wrapper!(
    /// The part of an attribute between the quotes.
    AttributeValue
);

/// An escaped [Tag].
pub fn tag(name: &str) -> Tag {
    Tag::new(name)
}

/// A [Tag] taken verbatim.
pub fn preescaped_tag(name: &str) -> Tag {
    Tag::preescaped(name)
}

/// An escaped [AttributeValue].
pub fn value(text: &str) -> AttributeValue {
    AttributeValue::new(text)
}

/// An escaped [AttributeValue] holding the [fmt::Display] form of `v`.
pub fn string_value(v: &impl fmt::Display) -> AttributeValue {
    AttributeValue::new(&v.to_string())
}

/// An [AttributeValue] taken verbatim.
pub fn preescaped_value(text: &str) -> AttributeValue {
    AttributeValue::preescaped(text)
}
