//! Domain models for tripview.
//!
//! This module contains the read-only records the edit form is built from:
//! - [`TripPoint`] - A single itinerary event with timing, price and add-ons
//! - [`PointType`] - The fixed set of event kinds
//! - [`Destination`] - A place with a description and photos
//! - [`Offer`] - A paid add-on that can be attached to a trip point
//! - [`DestinationLookup`] / [`OfferLookup`] - Id-based lookup capabilities

/// Declares a string-backed identifier newtype.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an id from anything string-like.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw id.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the id is the empty string.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

pub mod destination;
pub mod lookup;
pub mod offer;
pub mod trip_point;

pub use destination::{Destination, DestinationId, Picture};
pub use lookup::{DestinationLookup, OfferLookup};
pub use offer::{Offer, OfferId};
pub use trip_point::{PointId, PointType, TripPoint, blank_point};
