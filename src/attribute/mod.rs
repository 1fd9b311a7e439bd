//! Attributes and their application to fragments.

use std::fmt;
use std::sync::Arc;

use crate::fragment::{Fragment, Node};
use crate::lexical::{chunk_of, preescaped_tag, AttributeValue, Tag};

/// A `key="value"` pair waiting to be placed in an element's opening tag.
///
/// The rendered chunk (` key="value"`) is computed once, when the attribute is built.
#[derive(Clone)]
pub struct Attribute {
    chunk: Arc<[u8]>,
}

impl Attribute {
    pub(crate) fn chunk(&self) -> &Arc<[u8]> {
        return &self.chunk;
    }
}

impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "Attribute({:?})", String::from_utf8_lossy(&self.chunk));
    }
}

/// Something an [Attribute] can be attached to.
///
/// This is implemented both for a finished [Fragment] and for a [crate::Parent] still waiting
/// for its content, so attributes can be attached before or after the content is supplied.
pub trait Attributable: Sized {
    /// Attaches `attribute` to the opening tag of this element.
    ///
    /// When several attributes are attached, the one attached last is rendered first
    /// unless the renderer is configured with [crate::AttributeOrder::Application].
    /// Fragments without an opening tag (text, raw bytes, sequences) ignore attributes.
    fn with(self, attribute: Attribute) -> Self;
}

impl Attributable for Fragment {
    fn with(self, attribute: Attribute) -> Self {
        return Fragment::from_node(Node::Attributed {
            attribute,
            inner: self,
        });
    }
}

/// The attribute ` key="value"`.
///
/// ```
/// use butter::{attribute, leaf, tag, value, Attributable};
///
/// let img = leaf(&tag("img")).with(attribute(&tag("src"), &value("a.png")));
/// assert_eq!(img.to_string(), "<img src=\"a.png\" />");
/// ```
pub fn attribute(key: &Tag, value: &AttributeValue) -> Attribute {
    return Attribute {
        chunk: chunk_of(&[
            &b" "[..],
            key.as_bytes(),
            &b"=\""[..],
            value.as_bytes(),
            &b"\""[..],
        ]),
    };
}

/// A custom data attribute, ` data-name="value"`.
pub fn data_attribute(name: &str, value: &AttributeValue) -> Attribute {
    let key = preescaped_tag("data-").concat(&Tag::new(name));
    return attribute(&key, value);
}
