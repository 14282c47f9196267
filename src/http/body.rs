use std::borrow::Cow;
use std::sync::Arc;

/// In-memory message body.
///
/// The buffer is immutable and reference counted, so copies of a
/// [`Message`](crate::http::message::Message) share it. [`append`](Body::append)
/// returns a new handle instead of writing through the shared one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    buf: Arc<[u8]>,
}

impl Body {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_string(contents: impl Into<String>) -> Self {
        Self::from_bytes(contents.into().into_bytes())
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            buf: Arc::from(bytes.into()),
        }
    }

    /// The body as text. Invalid UTF-8 is replaced rather than rejected.
    pub fn contents(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.buf)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// A new body holding these contents followed by `more`.
    pub fn append(&self, more: &str) -> Body {
        let mut buf = Vec::with_capacity(self.buf.len() + more.len());
        buf.extend_from_slice(&self.buf);
        buf.extend_from_slice(more.as_bytes());
        Self::from_bytes(buf)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Whether both handles point at the same buffer.
    pub fn shares_buffer(&self, other: &Body) -> bool {
        Arc::ptr_eq(&self.buf, &other.buf)
    }
}

impl From<&str> for Body {
    fn from(contents: &str) -> Self {
        Self::from_string(contents)
    }
}

impl From<String> for Body {
    fn from(contents: String) -> Self {
        Self::from_string(contents)
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}
