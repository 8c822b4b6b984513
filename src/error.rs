//! Error types for rendering views and loading trip data.

use std::path::PathBuf;

use thiserror::Error;

use crate::event::Selector;
use crate::model::{DestinationId, OfferId, PointId};

/// Failure while building a view's markup or wiring its listeners.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The trip point names a destination the lookup does not know.
    #[error("unknown destination `{0}`")]
    UnknownDestination(DestinationId),

    /// The trip point lists an offer the lookup does not know.
    #[error("unknown offer `{0}`")]
    UnknownOffer(OfferId),

    /// A listener was bound to a selector with no matching element.
    #[error("no element matches `{0}`")]
    MissingTarget(Selector),

    #[error(transparent)]
    Template(#[from] askama::Error),
}

/// Failure while loading a trip dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset")]
    Json(#[from] serde_json::Error),

    #[error("duplicate {kind} id `{id}`")]
    DuplicateId { kind: &'static str, id: String },

    #[error("point `{point}` references unknown destination `{destination}`")]
    UnknownDestination {
        point: PointId,
        destination: DestinationId,
    },

    #[error("point `{point}` references unknown offer `{offer}`")]
    UnknownOffer { point: PointId, offer: OfferId },
}
