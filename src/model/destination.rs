use serde::{Deserialize, Serialize};

string_id!(
    /// Identifier of a [`Destination`].
    DestinationId
);

/// A place a trip point leads to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Display name (e.g., "Amsterdam")
    pub name: String,
    /// Free-form description shown in the details section
    #[serde(default)]
    pub description: String,
    /// Photos in display order
    #[serde(default)]
    pub pictures: Vec<Picture>,
}

/// A single destination photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    /// Image URL or path
    pub src: String,
    /// Alt text
    #[serde(default)]
    pub description: String,
}

impl Picture {
    pub fn new(src: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            description: description.into(),
        }
    }
}
