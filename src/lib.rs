//! Trip point edit form.
//!
//! Renders the editable form for a single itinerary event and reports the
//! user's rollup and submit interactions back to the owner of the view.

pub mod config;
pub mod dataset;
pub mod error;
pub mod event;
pub mod format;
pub mod model;
pub mod template;
pub mod view;

pub use dataset::Dataset;
pub use error::{DatasetError, RenderError};
pub use view::{TripPointEditOptions, TripPointEditView, View};
