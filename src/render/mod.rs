//! Turning a [Fragment] into bytes.

mod error;

use std::io;
use std::sync::Arc;

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use tracing::{debug, trace};

use crate::builder::Builder;
use crate::fragment::{Fragment, Node};

pub use error::{Error, Result};

/// The order in which an element's attributes are written into its opening tag.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum AttributeOrder {
    /// The attribute attached last is written first: `e.with(a).with(b)` gives `<e b a>`.
    #[default]
    Reverse,
    /// Attributes are written in the order they were attached: `e.with(a).with(b)` gives
    /// `<e a b>`.
    Application,
}

/// Renders fragments to bytes.
///
/// Rendering is linear in the size of the output, however deeply the fragment is nested.
#[derive(Debug, Copy, Clone, Default)]
pub struct Renderer {
    /// How attributes attached to the same element are ordered.
    pub attribute_order: AttributeOrder,
}

/// Work left to do while walking a fragment.
enum Step<'a> {
    /// Render a fragment, together with the element's pending attribute chunk.
    Visit(&'a Fragment, Builder),
    /// Emit a closing tag once an element's child is done.
    Close(&'a Arc<[u8]>),
}

impl Renderer {
    pub fn new() -> Self {
        return Renderer::default();
    }

    pub fn attribute_order(mut self, order: AttributeOrder) -> Self {
        self.attribute_order = order;
        return self;
    }

    /// Renders `fragment` into a [Builder] without flushing it.
    pub fn build(&self, fragment: &Fragment) -> Builder {
        trace!(attribute_order = %self.attribute_order, "rendering fragment");
        let mut out = Builder::new();
        let mut steps = vec![Step::Visit(fragment, Builder::new())];
        while let Some(step) = steps.pop() {
            let (fragment, mut attributes) = match step {
                Step::Visit(fragment, attributes) => (fragment, attributes),
                Step::Close(close) => {
                    out.append_shared(Arc::clone(close));
                    continue;
                }
            };
            match fragment.node() {
                Node::Empty => {}
                Node::Text(text) => out.append_escaped_text(text),
                Node::Raw(bytes) => out.append_shared(Arc::clone(bytes)),
                Node::Sequence(children) => {
                    // Siblings never share attributes.
                    for child in children.iter().rev() {
                        steps.push(Step::Visit(child, Builder::new()));
                    }
                }
                Node::Attributed { attribute, inner } => {
                    let chunk = Arc::clone(attribute.chunk());
                    match self.attribute_order {
                        AttributeOrder::Reverse => attributes.append_shared(chunk),
                        AttributeOrder::Application => attributes.prepend_shared(chunk),
                    }
                    steps.push(Step::Visit(inner, attributes));
                }
                Node::Void { open, terminator } => {
                    out.append_shared(Arc::clone(open));
                    out.append(attributes);
                    out.append_raw(terminator);
                }
                Node::Parent { open, close, child } => {
                    out.append_shared(Arc::clone(open));
                    out.append(attributes);
                    out.append_ascii_char(b'>');
                    steps.push(Step::Close(close));
                    steps.push(Step::Visit(child, Builder::new()));
                }
            }
        }
        return out;
    }

    /// Renders `fragment` to bytes.
    pub fn render(&self, fragment: &Fragment) -> Vec<u8> {
        let builder = self.build(fragment);
        trace!(
            bytes = builder.len(),
            attribute_order = %self.attribute_order,
            "rendered fragment"
        );
        return builder.flush();
    }

    /// Renders `fragment` to a string.
    pub fn render_string(&self, fragment: &Fragment) -> Result<String> {
        return Ok(String::from_utf8(self.render(fragment))?);
    }

    /// Renders `fragment` and writes the bytes to `writer`.
    pub fn render_to<W: io::Write>(&self, fragment: &Fragment, mut writer: W) -> Result<()> {
        let bytes = self.render(fragment);
        if let Err(err) = writer.write_all(&bytes).and_then(|_| writer.flush()) {
            debug!(bytes = bytes.len(), error = %err, "failed to write rendered fragment");
            return Err(err.into());
        }
        return Ok(());
    }
}
