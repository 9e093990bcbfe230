//! Top-level collections: places and the activity feed.
//!
//! A [`PlaceCollection`] is configured with the submission kinds once, at
//! construction, and every place inserted through it gets its submission
//! sets built with those kinds. Call sites never repeat the tags.

use serde_json::{Map, Value};

use crate::models::{Activity, Place, PlaceId, SubmissionKinds};
use crate::routes;

/// The place collection.
///
/// Kind propagation happens once per insertion: the collection's configured
/// [`SubmissionKinds`] flow into each place's constructor. Later mutation of
/// an inserted place does not re-propagate.
#[derive(Debug, Clone)]
pub struct PlaceCollection {
    kinds: SubmissionKinds,
    places: Vec<Place>,
}

impl PlaceCollection {
    /// Creates an empty collection configured with the given kinds.
    pub const fn new(kinds: SubmissionKinds) -> Self {
        Self {
            kinds,
            places: Vec::new(),
        }
    }

    /// The collection endpoint path.
    pub const fn url() -> &'static str {
        routes::PLACE_COLLECTION
    }

    /// The submission kinds this collection propagates.
    pub const fn kinds(&self) -> &SubmissionKinds {
        &self.kinds
    }

    /// Builds a place from an attribute blob and inserts it, propagating
    /// this collection's kinds into the place's submission sets.
    pub fn add(&mut self, attributes: Map<String, Value>) -> &mut Place {
        self.places.push(Place::new(attributes, &self.kinds));
        self.places.last_mut().expect("non-empty after push")
    }

    /// Builds and inserts one place per attribute blob.
    pub fn add_many(&mut self, batch: Vec<Map<String, Value>>) {
        for attributes in batch {
            self.add(attributes);
        }
    }

    /// The places in the collection.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// The places in the collection, mutably.
    pub fn places_mut(&mut self) -> &mut [Place] {
        &mut self.places
    }

    /// Finds a place by its server-assigned id.
    pub fn find(&self, id: PlaceId) -> Option<&Place> {
        self.places.iter().find(|p| p.id() == Some(id))
    }

    /// The number of places in the collection.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

/// The flat activity feed. No parent relationship, no per-item endpoints.
#[derive(Debug, Clone, Default)]
pub struct ActivityCollection {
    items: Vec<Activity>,
}

impl ActivityCollection {
    /// Creates an empty feed.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The feed endpoint path. Always the same literal, independent of state.
    pub const fn url() -> &'static str {
        routes::ACTIVITY_COLLECTION
    }

    /// Appends records to the feed.
    pub fn extend(&mut self, records: impl IntoIterator<Item = Activity>) {
        self.items.extend(records);
    }

    /// The records in the feed.
    pub fn items(&self) -> &[Activity] {
        &self.items
    }

    /// The number of records in the feed.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the feed is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
