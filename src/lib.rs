//! Combinators for building escaped HTML fragments and rendering them in linear time.
//!
//! Tags and attribute values are escaped once, when they are built, and can be reused across
//! any number of renders. Fragments are assembled from elements, text and other fragments,
//! and attributes can be attached to an element either before or after its content is
//! supplied; either way they end up inside the element's own opening tag.
//!
//! ```
//! use butter::{attribute, leaf, parent, seq, tag, text, value, Attributable};
//!
//! let p = parent(&tag("p"), &tag("/p"));
//! let img = leaf(&tag("img")).with(attribute(&tag("src"), &value("a.png")));
//! let page = p.content(seq![text("5 < 3"), img]);
//!
//! assert_eq!(
//!     butter::render_string(&page).unwrap(),
//!     "<p>5 &lt; 3<img src=\"a.png\" /></p>"
//! );
//! ```

pub mod attribute;
pub mod builder;
pub mod fragment;
pub mod lexical;
pub mod render;

use std::io;

pub use crate::attribute::{attribute, data_attribute, Attributable, Attribute};
pub use crate::fragment::{
    debug, leaf, open, parent, preescaped_text, string, text, unsafe_bytes, Fragment, Parent,
};
pub use crate::lexical::{
    preescaped_tag, preescaped_value, string_value, tag, value, AttributeValue, Tag,
};
pub use crate::render::{AttributeOrder, Error, Renderer, Result};

/// Renders `fragment` to bytes with the default [Renderer].
pub fn render(fragment: &Fragment) -> Vec<u8> {
    Renderer::new().render(fragment)
}

/// Renders `fragment` to a string with the default [Renderer].
///
/// Fails only if [unsafe_bytes] inserted invalid UTF-8.
pub fn render_string(fragment: &Fragment) -> Result<String> {
    Renderer::new().render_string(fragment)
}

/// Renders `fragment` with the default [Renderer] and writes it to `writer`.
pub fn render_to<W: io::Write>(fragment: &Fragment, writer: W) -> Result<()> {
    Renderer::new().render_to(fragment, writer)
}
