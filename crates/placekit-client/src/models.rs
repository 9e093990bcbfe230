//! Entity models: places, submissions, and the activity feed.
//!
//! A [`Place`] owns exactly two [`SubmissionSet`]s, one for survey responses
//! and one for support, constructed with the place itself. Places start out
//! unsaved; the server assigns an id on the first successful create, and that
//! transition happens exactly once.

use chrono::{DateTime, Utc};
use placekit_core::settings::Settings;
use placekit_core::{PlacekitError, PlacekitResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::routes;

/// Server-assigned place identifier.
pub type PlaceId = u64;

/// The pair of submission type tags a place's sets are constructed with.
///
/// Kinds are plain caller-supplied strings (e.g. `"responses"`, `"support"`);
/// they become path segments in submission endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionKinds {
    /// The tag for survey response submissions.
    pub response_type: String,
    /// The tag for support submissions.
    pub support_type: String,
}

impl SubmissionKinds {
    /// Creates a new pair of submission kinds.
    pub fn new(response_type: impl Into<String>, support_type: impl Into<String>) -> Self {
        Self {
            response_type: response_type.into(),
            support_type: support_type.into(),
        }
    }
}

impl Default for SubmissionKinds {
    fn default() -> Self {
        Self::new("responses", "support")
    }
}

impl From<&Settings> for SubmissionKinds {
    fn from(settings: &Settings) -> Self {
        Self::new(&settings.response_type, &settings.support_type)
    }
}

/// Which of a place's two submission sets an operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionSlot {
    /// The survey response set.
    Responses,
    /// The support set.
    Support,
}

/// A single submission record.
///
/// Submissions are schemaless: everything besides the id travels in the
/// attributes blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// Server-assigned id, `None` until created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// The submission's attribute blob.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Submission {
    /// Creates an unsaved submission from an attribute blob.
    pub const fn new(attributes: Map<String, Value>) -> Self {
        Self {
            id: None,
            attributes,
        }
    }
}

/// A place's submission collection for one submission type.
///
/// Sets never exist apart from an owning [`Place`]; endpoint resolution takes
/// the owner explicitly, so a set can never address the server on behalf of
/// a place that has not been saved.
#[derive(Debug, Clone)]
pub struct SubmissionSet {
    submission_type: String,
    items: Vec<Submission>,
}

impl SubmissionSet {
    /// Creates an empty set tagged with the given submission type.
    pub fn new(submission_type: impl Into<String>) -> Self {
        Self {
            submission_type: submission_type.into(),
            items: Vec::new(),
        }
    }

    /// The submission type tag this set was constructed with.
    pub fn submission_type(&self) -> &str {
        &self.submission_type
    }

    /// Resolves this set's collection endpoint for the given owning place.
    ///
    /// # Errors
    ///
    /// Returns [`PlacekitError::UnsavedPlace`] if the owner has no id yet.
    pub fn endpoint(&self, place: &Place) -> PlacekitResult<String> {
        routes::submission_collection(place.id(), &self.submission_type)
    }

    /// Appends a submission to the set.
    pub fn push(&mut self, submission: Submission) {
        self.items.push(submission);
    }

    /// The submissions currently held in the set.
    pub fn items(&self) -> &[Submission] {
        &self.items
    }

    /// The number of submissions in the set.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A place entity.
///
/// The id is assigned server-side on the first successful create; until then
/// the place is unsaved and its submission endpoints cannot be resolved. The
/// two submission sets are created in the constructor and owned exclusively
/// by the place.
#[derive(Debug, Clone)]
pub struct Place {
    id: Option<PlaceId>,
    /// The place's attribute blob (location, description, type, ...).
    pub attributes: Map<String, Value>,
    responses: SubmissionSet,
    support: SubmissionSet,
}

impl Place {
    /// Creates an unsaved place, constructing its two submission sets with
    /// the given kinds.
    pub fn new(attributes: Map<String, Value>, kinds: &SubmissionKinds) -> Self {
        Self {
            id: None,
            attributes,
            responses: SubmissionSet::new(&kinds.response_type),
            support: SubmissionSet::new(&kinds.support_type),
        }
    }

    /// The server-assigned id, or `None` while unsaved.
    pub const fn id(&self) -> Option<PlaceId> {
        self.id
    }

    /// Whether the place has been saved (has an id).
    pub const fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    /// Records the server-assigned id after a successful create.
    ///
    /// The unsaved-to-saved transition is irreversible and happens exactly
    /// once.
    ///
    /// # Errors
    ///
    /// Returns [`PlacekitError::AlreadySaved`] if an id was already assigned.
    pub fn assign_id(&mut self, id: PlaceId) -> PlacekitResult<()> {
        match self.id {
            Some(existing) => Err(PlacekitError::AlreadySaved { existing }),
            None => {
                self.id = Some(id);
                Ok(())
            }
        }
    }

    /// The survey response set.
    pub const fn responses(&self) -> &SubmissionSet {
        &self.responses
    }

    /// The survey response set, mutably.
    pub fn responses_mut(&mut self) -> &mut SubmissionSet {
        &mut self.responses
    }

    /// The support set.
    pub const fn support(&self) -> &SubmissionSet {
        &self.support
    }

    /// The support set, mutably.
    pub fn support_mut(&mut self) -> &mut SubmissionSet {
        &mut self.support
    }

    /// Borrows the set addressed by `slot`.
    pub const fn set(&self, slot: SubmissionSlot) -> &SubmissionSet {
        match slot {
            SubmissionSlot::Responses => &self.responses,
            SubmissionSlot::Support => &self.support,
        }
    }

    /// Borrows the set addressed by `slot`, mutably.
    pub fn set_mut(&mut self, slot: SubmissionSlot) -> &mut SubmissionSet {
        match slot {
            SubmissionSlot::Responses => &mut self.responses,
            SubmissionSlot::Support => &mut self.support,
        }
    }

    /// Resolves the collection endpoint of one of this place's submission
    /// sets.
    ///
    /// # Errors
    ///
    /// Returns [`PlacekitError::UnsavedPlace`] while the place is unsaved.
    pub fn submission_endpoint(&self, slot: SubmissionSlot) -> PlacekitResult<String> {
        routes::submission_collection(self.id, self.set(slot).submission_type())
    }

    /// The place's own instance endpoint, or `None` while unsaved.
    pub fn instance_endpoint(&self) -> Option<String> {
        self.id.map(routes::place_instance)
    }

    /// The attribute blob as a JSON value, for create/update payloads. The
    /// id never travels in the payload; the server owns it.
    pub fn to_payload(&self) -> Value {
        Value::Object(self.attributes.clone())
    }
}

/// One record in the flat activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// The activity record id.
    pub id: u64,
    /// The place the activity refers to.
    pub place_id: PlaceId,
    /// The kind of activity (e.g. "create").
    pub action: String,
    /// When the activity happened.
    pub when: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), Value::String((*v).to_string())))
            .collect()
    }

    // ── Place construction ──────────────────────────────────────────

    #[test]
    fn test_new_place_is_unsaved() {
        let place = Place::new(Map::new(), &SubmissionKinds::default());
        assert!(!place.is_saved());
        assert_eq!(place.id(), None);
    }

    #[test]
    fn test_place_sets_carry_kinds() {
        let kinds = SubmissionKinds::new("comments", "likes");
        let place = Place::new(Map::new(), &kinds);
        assert_eq!(place.responses().submission_type(), "comments");
        assert_eq!(place.support().submission_type(), "likes");
    }

    // ── Saved-state transition ──────────────────────────────────────

    #[test]
    fn test_assign_id_once() {
        let mut place = Place::new(Map::new(), &SubmissionKinds::default());
        place.assign_id(7).unwrap();
        assert!(place.is_saved());
        assert_eq!(place.id(), Some(7));
    }

    #[test]
    fn test_assign_id_twice_fails() {
        let mut place = Place::new(Map::new(), &SubmissionKinds::default());
        place.assign_id(7).unwrap();
        let err = place.assign_id(8).unwrap_err();
        assert!(matches!(err, PlacekitError::AlreadySaved { existing: 7 }));
        assert_eq!(place.id(), Some(7));
    }

    // ── Endpoint resolution ─────────────────────────────────────────

    #[test]
    fn test_unsaved_place_submission_endpoints_fail() {
        let place = Place::new(Map::new(), &SubmissionKinds::default());
        assert!(place.responses().endpoint(&place).is_err());
        assert!(place.support().endpoint(&place).is_err());
    }

    #[test]
    fn test_saved_place_submission_endpoints() {
        let mut place = Place::new(Map::new(), &SubmissionKinds::default());
        place.assign_id(5).unwrap();
        assert_eq!(
            place.responses().endpoint(&place).unwrap(),
            "/api/places/5/responses/"
        );
        assert_eq!(
            place.support().endpoint(&place).unwrap(),
            "/api/places/5/support/"
        );
    }

    #[test]
    fn test_submission_endpoint_by_slot() {
        let mut place = Place::new(Map::new(), &SubmissionKinds::default());
        place.assign_id(5).unwrap();
        assert_eq!(
            place.submission_endpoint(SubmissionSlot::Responses).unwrap(),
            "/api/places/5/responses/"
        );
        assert_eq!(
            place.submission_endpoint(SubmissionSlot::Support).unwrap(),
            "/api/places/5/support/"
        );
    }

    #[test]
    fn test_instance_endpoint() {
        let mut place = Place::new(Map::new(), &SubmissionKinds::default());
        assert!(place.instance_endpoint().is_none());
        place.assign_id(11).unwrap();
        assert_eq!(place.instance_endpoint().unwrap(), "/api/places/11/");
    }

    // ── Payloads and submissions ────────────────────────────────────

    #[test]
    fn test_place_payload_excludes_id() {
        let mut place = Place::new(attrs(&[("description", "A bench")]), &SubmissionKinds::default());
        place.assign_id(3).unwrap();
        let payload = place.to_payload();
        assert_eq!(payload["description"], "A bench");
        assert!(payload.get("id").is_none());
    }

    #[test]
    fn test_submission_set_push() {
        let mut place = Place::new(Map::new(), &SubmissionKinds::default());
        assert!(place.responses().is_empty());
        place
            .responses_mut()
            .push(Submission::new(attrs(&[("comment", "nice spot")])));
        assert_eq!(place.responses().len(), 1);
        assert!(place.support().is_empty());
    }

    #[test]
    fn test_submission_wire_shape() {
        let submission = Submission {
            id: Some(4),
            attributes: attrs(&[("comment", "hello")]),
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["comment"], "hello");
    }

    #[test]
    fn test_unsaved_submission_omits_id() {
        let submission = Submission::new(Map::new());
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_activity_deserializes() {
        let json = r#"{"id": 1, "place_id": 9, "action": "create", "when": "2013-01-15T18:30:00Z"}"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.place_id, 9);
        assert_eq!(activity.action, "create");
    }

    #[test]
    fn test_kinds_from_settings() {
        let settings = Settings::default();
        let kinds = SubmissionKinds::from(&settings);
        assert_eq!(kinds, SubmissionKinds::default());
    }
}
