use std::sync::Arc;

use super::{Fragment, Node};
use crate::attribute::{Attributable, Attribute};
use crate::lexical::{chunk_of, Tag};

/// An element still waiting for its content.
///
/// Attributes applied to it are kept until [Parent::content] supplies the inner fragment, so
/// they can be attached before the content is known.
#[derive(Clone, Debug)]
pub struct Parent {
    open: Arc<[u8]>,
    close: Arc<[u8]>,
    attributes: Vec<Attribute>,
}

impl Parent {
    /// Builds the element around `inner`.
    ///
    /// `inner` keeps its own attributes; the element's attributes only go into the element's
    /// opening tag.
    pub fn content(&self, inner: Fragment) -> Fragment {
        let mut element = Fragment::from_node(Node::Parent {
            open: Arc::clone(&self.open),
            close: Arc::clone(&self.close),
            child: inner,
        });
        for attribute in &self.attributes {
            element = element.with(attribute.clone());
        }
        return element;
    }
}

impl Attributable for Parent {
    fn with(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        return self;
    }
}

/// An element with content: `<open ...>content<close>`.
///
/// ```
/// use butter::{parent, tag, text};
///
/// let p = parent(&tag("p"), &tag("/p"));
/// assert_eq!(p.content(text("5 < 3")).to_string(), "<p>5 &lt; 3</p>");
/// ```
pub fn parent(open: &Tag, close: &Tag) -> Parent {
    return Parent {
        open: chunk_of(&[&b"<"[..], open.as_bytes()]),
        close: chunk_of(&[&b"<"[..], close.as_bytes(), &b">"[..]]),
        attributes: Vec::new(),
    };
}

/// A self-closing element: `<tag ... />`.
pub fn leaf(tag: &Tag) -> Fragment {
    return void(tag, b" />");
}

/// An element left open, as legacy void elements are written: `<tag ...>`.
pub fn open(tag: &Tag) -> Fragment {
    return void(tag, b">");
}

fn void(tag: &Tag, terminator: &'static [u8]) -> Fragment {
    return Fragment::from_node(Node::Void {
        open: chunk_of(&[&b"<"[..], tag.as_bytes()]),
        terminator,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::attribute;
    use crate::fragment::text;
    use crate::lexical::{tag, value};

    macro_rules! assert_renders {
        ($fragment:expr, $expected:expr) => {
            assert_eq!($fragment.to_string(), $expected);
        };
    }

    #[test]
    fn test_leaf_and_open() {
        assert_renders!(leaf(&tag("br")), "<br />");
        assert_renders!(open(&tag("br")), "<br>");
    }

    #[test]
    fn test_parent() {
        let div = parent(&tag("div"), &tag("/div"));
        assert_renders!(div.content(Fragment::empty()), "<div></div>");
        assert_renders!(
            div.content(leaf(&tag("hr")).then(text("&"))),
            "<div><hr />&amp;</div>"
        );
    }

    #[test]
    fn test_parent_is_reusable() {
        let li = parent(&tag("li"), &tag("/li"));
        let items: Fragment = (1..=3).map(|i| li.content(crate::string(&i))).collect();
        assert_renders!(items, "<li>1</li><li>2</li><li>3</li>");
    }

    #[test]
    fn test_attributes_before_content() {
        let a = parent(&tag("a"), &tag("/a"))
            .with(attribute(&tag("href"), &value("/x?a=1&b=2")))
            .content(text("link"));
        assert_renders!(a, "<a href=\"/x?a=1&amp;b=2\">link</a>");
    }

    #[test]
    fn test_deferred_attributes_match_direct_application() {
        let key = tag("k");
        let deferred = parent(&tag("p"), &tag("/p"))
            .with(attribute(&key, &value("1")))
            .with(attribute(&key, &value("2")))
            .content(text("x"));
        let direct = parent(&tag("p"), &tag("/p"))
            .content(text("x"))
            .with(attribute(&key, &value("1")))
            .with(attribute(&key, &value("2")));
        assert_eq!(deferred.to_string(), direct.to_string());
    }
}
