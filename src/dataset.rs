//! Trip data loaded from disk.
//!
//! A dataset is a single JSON document holding the destination catalogue,
//! the offers available per event type and the trip points themselves:
//!
//! ```json
//! {
//!   "destinations": [{ "id": "d-1", "name": "Amsterdam", "description": "...", "pictures": [] }],
//!   "offers": [{ "type": "taxi", "offers": [{ "id": "o-1", "title": "Upgrade", "price": 50 }] }],
//!   "points": [{ "id": "p-1", "base_price": 20, "type": "taxi", "destination": "d-1", "offers": ["o-1"] }]
//! }
//! ```
//!
//! Loading validates every reference so the views can rely on lookups
//! resolving.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::DatasetError;
use crate::model::{Destination, DestinationId, Offer, OfferId, PointType, TripPoint};

#[derive(Deserialize)]
struct RawDataset {
    #[serde(default)]
    destinations: Vec<DestinationRecord>,
    #[serde(default)]
    offers: Vec<OfferGroup>,
    #[serde(default)]
    points: Vec<TripPoint>,
}

#[derive(Deserialize)]
struct DestinationRecord {
    id: DestinationId,
    #[serde(flatten)]
    destination: Destination,
}

#[derive(Deserialize)]
struct OfferGroup {
    #[serde(rename = "type")]
    kind: PointType,
    #[serde(default)]
    offers: Vec<Offer>,
}

/// Validated trip data with id lookups.
#[derive(Debug, Default)]
pub struct Dataset {
    destinations: HashMap<DestinationId, Destination>,
    offers: HashMap<OfferId, Offer>,
    offers_by_type: HashMap<PointType, Vec<OfferId>>,
    points: Vec<TripPoint>,
}

impl Dataset {
    /// Read and validate a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json(&content)?;
        debug!(
            ?path,
            points = dataset.points.len(),
            destinations = dataset.destinations.len(),
            offers = dataset.offers.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Parse and validate a dataset document.
    pub fn from_json(content: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset = serde_json::from_str(content)?;
        let mut dataset = Self::default();

        for record in raw.destinations {
            if dataset.destinations.contains_key(&record.id) {
                return Err(DatasetError::DuplicateId {
                    kind: "destination",
                    id: record.id.to_string(),
                });
            }
            dataset.destinations.insert(record.id, record.destination);
        }

        for group in raw.offers {
            let ids = dataset.offers_by_type.entry(group.kind).or_default();
            for offer in group.offers {
                if dataset.offers.contains_key(&offer.id) {
                    return Err(DatasetError::DuplicateId {
                        kind: "offer",
                        id: offer.id.to_string(),
                    });
                }
                ids.push(offer.id.clone());
                dataset.offers.insert(offer.id.clone(), offer);
            }
        }

        let mut point_ids = HashSet::new();
        for point in &raw.points {
            if !point_ids.insert(&point.id) {
                return Err(DatasetError::DuplicateId {
                    kind: "point",
                    id: point.id.to_string(),
                });
            }
            if !point.destination.is_empty()
                && !dataset.destinations.contains_key(&point.destination)
            {
                return Err(DatasetError::UnknownDestination {
                    point: point.id.clone(),
                    destination: point.destination.clone(),
                });
            }
            if let Some(offer) = point
                .offers
                .iter()
                .find(|id| !dataset.offers.contains_key(*id))
            {
                return Err(DatasetError::UnknownOffer {
                    point: point.id.clone(),
                    offer: offer.clone(),
                });
            }
        }
        dataset.points = raw.points;

        Ok(dataset)
    }

    pub const fn destinations(&self) -> &HashMap<DestinationId, Destination> {
        &self.destinations
    }

    pub const fn offers(&self) -> &HashMap<OfferId, Offer> {
        &self.offers
    }

    pub fn points(&self) -> &[TripPoint] {
        &self.points
    }

    /// Find a point by its id.
    pub fn point(&self, id: &str) -> Option<&TripPoint> {
        self.points.iter().find(|point| point.id.as_str() == id)
    }

    /// Offers that can be attached to an event of `kind`, in catalogue order.
    pub fn offers_for(&self, kind: PointType) -> Vec<&Offer> {
        self.offers_by_type
            .get(&kind)
            .into_iter()
            .flatten()
            .filter_map(|id| self.offers.get(id))
            .collect()
    }
}
