//! The composable representation of a piece of markup.
//!
//! A [Fragment] is an immutable tree. Nothing is rendered while it is built; attributes
//! attached to it are recorded as wrappers and only resolved when the tree is rendered, which
//! is how an attribute attached after an element's content still lands in its opening tag.

mod element;
mod text;

use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::attribute::Attribute;

pub use element::{leaf, open, parent, Parent};
pub use text::{debug, preescaped_text, string, text, unsafe_bytes};

/// The shapes a fragment can take.
pub(crate) enum Node {
    /// Renders nothing.
    Empty,
    /// `<` tag, the element's own attributes, then a fixed terminator (`>` or ` />`).
    Void {
        open: Arc<[u8]>,
        terminator: &'static [u8],
    },
    /// `<` tag, the element's own attributes, `>`, the child, then the closing tag.
    Parent {
        open: Arc<[u8]>,
        close: Arc<[u8]>,
        child: Fragment,
    },
    /// Text escaped while rendering.
    Text(Arc<str>),
    /// Bytes written verbatim.
    Raw(Arc<[u8]>),
    /// Siblings, rendered left to right.
    Sequence(Vec<Fragment>),
    /// `inner` with one more attribute for its own opening tag.
    Attributed { attribute: Attribute, inner: Fragment },
}

impl Node {
    /// Moves the child fragments out, leaving empty ones behind.
    fn take_children(&mut self, into: &mut Vec<Fragment>) {
        match self {
            Node::Parent { child, .. } | Node::Attributed { inner: child, .. } => {
                into.push(mem::take(child));
            }
            Node::Sequence(children) => into.append(children),
            _ => {}
        }
    }
}

impl Drop for Node {
    // Unlinks the subtree with an explicit stack, so dropping a deeply nested tree cannot
    // overflow the call stack.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(fragment) = pending.pop() {
            if let Ok(mut node) = Arc::try_unwrap(fragment.node) {
                node.take_children(&mut pending);
            }
        }
    }
}

lazy_static! {
    static ref EMPTY: Fragment = Fragment::from_node(Node::Empty);
}

/// A piece of markup content, possibly with attributes waiting for its opening tag.
///
/// Cloning is O(1), and a fragment may be rendered any number of times, from any number of
/// threads.
#[derive(Clone)]
pub struct Fragment {
    node: Arc<Node>,
}

impl Fragment {
    pub(crate) fn from_node(node: Node) -> Self {
        return Fragment {
            node: Arc::new(node),
        };
    }

    pub(crate) fn node(&self) -> &Node {
        return &self.node;
    }

    /// The fragment that renders to nothing; the identity of [Fragment::then].
    pub fn empty() -> Self {
        return EMPTY.clone();
    }

    pub fn is_empty(&self) -> bool {
        return matches!(*self.node, Node::Empty);
    }

    /// Places `next` after this fragment.
    pub fn then(self, next: Fragment) -> Fragment {
        if self.is_empty() {
            return next;
        }
        if next.is_empty() {
            return self;
        }
        return Fragment::from_node(Node::Sequence(vec![self, next]));
    }

    /// Places all `fragments` one after the other.
    ///
    /// Equivalent to chaining [Fragment::then], but builds a single flat node.
    pub fn concat<I>(fragments: I) -> Fragment
    where
        I: IntoIterator<Item = Fragment>,
    {
        let mut children: Vec<Fragment> = fragments
            .into_iter()
            .filter(|fragment| !fragment.is_empty())
            .collect();
        return match children.len() {
            0 => Fragment::empty(),
            1 => children.remove(0),
            _ => Fragment::from_node(Node::Sequence(children)),
        };
    }
}

impl Default for Fragment {
    fn default() -> Self {
        Fragment::empty()
    }
}

impl FromIterator<Fragment> for Fragment {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Fragment::concat(iter)
    }
}

impl fmt::Display for Fragment {
    /// Renders the fragment with the default settings, replacing invalid UTF-8.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let bytes = crate::render(self);
        return f.write_str(&String::from_utf8_lossy(&bytes));
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "Fragment({:?})", self.to_string());
    }
}

/// Places fragments one after the other, like [Fragment::concat].
///
/// ```
/// use butter::{seq, text};
///
/// let greeting = seq![text("Hello"), text(", "), text("world")];
/// assert_eq!(greeting.to_string(), "Hello, world");
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Fragment::empty()
    };
    ($($fragment:expr),+ $(,)?) => {
        $crate::Fragment::concat([$($fragment),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::tag;

    macro_rules! assert_renders {
        ($fragment:expr, $expected:expr) => {
            assert_eq!($fragment.to_string(), $expected);
        };
    }

    #[test]
    fn test_empty() {
        assert!(Fragment::empty().is_empty());
        assert!(Fragment::default().is_empty());
        assert_renders!(Fragment::empty(), "");
    }

    #[test]
    fn test_then_keeps_order() {
        assert_renders!(text("a").then(text("b")).then(text("c")), "abc");
    }

    #[test]
    fn test_then_skips_empty() {
        let fragment = Fragment::empty().then(text("x")).then(Fragment::empty());
        assert!(matches!(fragment.node(), Node::Text(_)));
    }

    #[test]
    fn test_concat_flattens_and_skips_empty() {
        let fragment = Fragment::concat(vec![text("a"), Fragment::empty(), text("b")]);
        match fragment.node() {
            Node::Sequence(children) => assert_eq!(children.len(), 2),
            _ => panic!("Expected a sequence"),
        }
        assert_renders!(fragment, "ab");
        assert!(Fragment::concat(Vec::new()).is_empty());
    }

    #[test]
    fn test_collect() {
        let items: Fragment = ["1", "<2>", "3"].iter().map(|s| text(s)).collect();
        assert_renders!(items, "1&lt;2&gt;3");
    }

    #[test]
    fn test_seq_macro() {
        assert!(seq![].is_empty());
        assert_renders!(seq![text("a")], "a");
        assert_renders!(seq![text("a"), leaf(&tag("br")),], "a<br />");
    }

    #[test]
    fn test_debug_shows_rendering() {
        assert_eq!(format!("{:?}", text("<")), "Fragment(\"&lt;\")");
    }

    #[test]
    fn test_fragment_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Fragment>();
        assert_send_sync::<Parent>();
    }
}
