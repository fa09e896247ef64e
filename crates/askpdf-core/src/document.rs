//! Document processor trait

use crate::{Result, Segment};

/// Trait for document processors
///
/// Turns raw file bytes into text segments suitable for indexing. An empty
/// result is valid and means the document had no extractable text; callers
/// must check for it.
pub trait DocumentProcessor: Send + Sync {
    fn process(&self, bytes: &[u8]) -> Result<Vec<Segment>>;
}
