//! An append-only byte builder with escaping primitives.
//!
//! A [Builder] is a list of chunks. Precomputed chunks (tags, attributes) are shared rather
//! than copied, so appending them and concatenating two builders are both O(1). The bytes are
//! copied exactly once, by [Builder::flush].

mod escaping;

use std::collections::LinkedList;
use std::fmt;
use std::mem;
use std::sync::Arc;

use itertools::Itertools;

pub use escaping::escape;

/// A sealed piece of output.
enum Chunk {
    /// A precomputed chunk, shared with the value that owns it.
    Shared(Arc<[u8]>),
    /// Bytes written into this builder.
    Owned(Vec<u8>),
}

impl Chunk {
    fn as_bytes(&self) -> &[u8] {
        return match self {
            Chunk::Shared(bytes) => bytes,
            Chunk::Owned(bytes) => bytes,
        };
    }
}

/// Accumulates output bytes until they are flushed.
#[derive(Default)]
pub struct Builder {
    sealed: LinkedList<Chunk>,
    /// Open chunk receiving small appends; sealed before anything is linked after it.
    tail: Vec<u8>,
    len: usize,
}

impl Builder {
    /// Creates an empty builder, the identity for [Builder::concat].
    pub fn new() -> Self {
        return Builder::default();
    }

    /// Number of bytes accumulated so far.
    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Appends `bytes` verbatim, with no escaping and no validation.
    pub fn append_raw(&mut self, bytes: &[u8]) {
        self.tail.extend_from_slice(bytes);
        self.len += bytes.len();
    }

    /// Appends a precomputed chunk without copying it.
    pub fn append_shared(&mut self, chunk: Arc<[u8]>) {
        if chunk.is_empty() {
            return;
        }
        self.seal();
        self.len += chunk.len();
        self.sealed.push_back(Chunk::Shared(chunk));
    }

    /// Links a precomputed chunk in front of everything accumulated so far.
    pub fn prepend_shared(&mut self, chunk: Arc<[u8]>) {
        if chunk.is_empty() {
            return;
        }
        self.len += chunk.len();
        self.sealed.push_front(Chunk::Shared(chunk));
    }

    /// Appends `text`, replacing reserved markup characters with entity references.
    pub fn append_escaped_text(&mut self, text: &str) {
        let before = self.tail.len();
        escaping::escape_into(text, &mut self.tail);
        self.len += self.tail.len() - before;
    }

    /// Appends a single structural byte such as `>` or `"`.
    pub fn append_ascii_char(&mut self, byte: u8) {
        debug_assert!(byte.is_ascii(), "not an ASCII byte: {:#04x}", byte);
        self.tail.push(byte);
        self.len += 1;
    }

    /// Moves every chunk of `other` to the end of this builder in O(1).
    pub fn append(&mut self, mut other: Builder) {
        if other.is_empty() {
            return;
        }
        self.seal();
        other.seal();
        self.len += other.len;
        self.sealed.append(&mut other.sealed);
    }

    /// Combines two partially built outputs, `self` first.
    pub fn concat(mut self, other: Builder) -> Builder {
        self.append(other);
        return self;
    }

    /// Materializes the accumulated output with a single allocation.
    pub fn flush(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len);
        for chunk in &self.sealed {
            out.extend_from_slice(chunk.as_bytes());
        }
        out.extend_from_slice(&self.tail);
        return out;
    }

    fn seal(&mut self) {
        if !self.tail.is_empty() {
            self.sealed.push_back(Chunk::Owned(mem::take(&mut self.tail)));
        }
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chunks = self
            .sealed
            .iter()
            .map(Chunk::as_bytes)
            .chain(std::iter::once(self.tail.as_slice()))
            .filter(|bytes| !bytes.is_empty())
            .map(|bytes| format!("{:?}", String::from_utf8_lossy(bytes)))
            .join(", ");
        return write!(f, "Builder[{}]", chunks);
    }
}
