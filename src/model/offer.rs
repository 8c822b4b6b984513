use serde::{Deserialize, Serialize};

string_id!(
    /// Identifier of an [`Offer`].
    OfferId
);

/// A paid add-on for a trip point (e.g., extra luggage).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    pub title: String,
    pub price: u32,
}

impl Offer {
    pub fn new(id: impl Into<OfferId>, title: impl Into<String>, price: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
        }
    }
}
