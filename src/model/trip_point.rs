use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::format::capitalize;
use crate::model::{DestinationId, OfferId};

string_id!(
    /// Identifier of a [`TripPoint`] inside a dataset.
    PointId
);

/// Kind of itinerary event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointType {
    #[default]
    Taxi,
    Bus,
    Train,
    Ship,
    Drive,
    Flight,
    CheckIn,
    Sightseeing,
    Restaurant,
}

impl PointType {
    /// Every event type, in the order the type selector lists them.
    pub const ALL: [Self; 9] = [
        Self::Taxi,
        Self::Bus,
        Self::Train,
        Self::Ship,
        Self::Drive,
        Self::Flight,
        Self::CheckIn,
        Self::Sightseeing,
        Self::Restaurant,
    ];

    /// Wire/markup identifier (e.g., "check-in").
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Taxi => "taxi",
            Self::Bus => "bus",
            Self::Train => "train",
            Self::Ship => "ship",
            Self::Drive => "drive",
            Self::Flight => "flight",
            Self::CheckIn => "check-in",
            Self::Sightseeing => "sightseeing",
            Self::Restaurant => "restaurant",
        }
    }

    /// Human-readable label (e.g., "Check-in").
    pub fn label(self) -> String {
        capitalize(self.as_str())
    }
}

impl fmt::Display for PointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single itinerary event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripPoint {
    /// Dataset id; empty for a point that has not been saved yet
    #[serde(default)]
    pub id: PointId,
    #[serde(default)]
    pub base_price: u32,
    #[serde(default, deserialize_with = "optional_date")]
    pub date_from: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "optional_date")]
    pub date_to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(rename = "type", default)]
    pub kind: PointType,
    /// Empty when no destination has been chosen yet
    #[serde(default)]
    pub destination: DestinationId,
    /// Selected add-ons, in display order
    #[serde(default)]
    pub offers: Vec<OfferId>,
}

/// The point used when creating a new event: a zero-priced taxi ride with
/// no destination, dates or offers.
pub fn blank_point() -> TripPoint {
    TripPoint::default()
}

/// Accepts RFC 3339 timestamps and treats `null` or an empty string as unset.
fn optional_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|date| Some(date.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom),
    }
}
