use smol_str::SmolStr;

use crate::extract_group_title;

/// A `#EXTINF` line paired with the media line that follows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    metadata: SmolStr,
    location: SmolStr,
}

impl Entry {
    pub fn new(metadata: impl Into<SmolStr>, location: impl Into<SmolStr>) -> Self {
        Self {
            metadata: metadata.into(),
            location: location.into(),
        }
    }

    /// The raw `#EXTINF` line, attributes included
    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    /// The URI or path of the media
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn group_title(&self) -> &str {
        extract_group_title(&self.metadata)
    }
}
