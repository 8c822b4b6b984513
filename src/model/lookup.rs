//! Id-based lookup capabilities.
//!
//! The edit form never owns the destination or offer stores. It borrows
//! something that can resolve an id, which is usually a map owned by the
//! dataset, but tests and callers can plug in anything.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::model::{Destination, DestinationId, Offer, OfferId};

/// Resolves a [`DestinationId`] to its [`Destination`].
pub trait DestinationLookup {
    fn destination(&self, id: &DestinationId) -> Option<&Destination>;
}

/// Resolves an [`OfferId`] to its [`Offer`].
pub trait OfferLookup {
    fn offer(&self, id: &OfferId) -> Option<&Offer>;
}

impl<S: BuildHasher> DestinationLookup for HashMap<DestinationId, Destination, S> {
    fn destination(&self, id: &DestinationId) -> Option<&Destination> {
        self.get(id)
    }
}

impl DestinationLookup for BTreeMap<DestinationId, Destination> {
    fn destination(&self, id: &DestinationId) -> Option<&Destination> {
        self.get(id)
    }
}

impl<S: BuildHasher> OfferLookup for HashMap<OfferId, Offer, S> {
    fn offer(&self, id: &OfferId) -> Option<&Offer> {
        self.get(id)
    }
}

impl OfferLookup for BTreeMap<OfferId, Offer> {
    fn offer(&self, id: &OfferId) -> Option<&Offer> {
        self.get(id)
    }
}
