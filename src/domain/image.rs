use std::fmt;
use std::sync::Arc;

/// Raw avatar image as downloaded.
///
/// Decoding is left to whoever displays it. The buffer is shared, so
/// cloning the state that holds images stays cheap.
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    bytes: Arc<[u8]>,
    content_type: Option<String>,
}

impl Image {
    pub fn new(bytes: impl Into<Arc<[u8]>>, content_type: Option<String>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("len", &self.bytes.len())
            .field("content_type", &self.content_type)
            .finish()
    }
}
