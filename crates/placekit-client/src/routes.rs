//! Endpoint path builders for the places API.
//!
//! Collection paths are fixed constants; instance and submission paths are
//! computed from in-memory identifiers. Resolving a submission path requires
//! the owning place to have a server-assigned id, and fails otherwise.

use placekit_core::{PlacekitError, PlacekitResult};

use crate::models::PlaceId;

/// The place collection path.
pub const PLACE_COLLECTION: &str = "/api/places/";

/// The activity feed path. Unscoped, no parent, no parameters.
pub const ACTIVITY_COLLECTION: &str = "/api/activity/";

/// Returns the path for a single place.
pub fn place_instance(place_id: PlaceId) -> String {
    format!("/api/places/{place_id}/")
}

/// Returns the path for a place's submission collection of the given type.
///
/// # Errors
///
/// Returns [`PlacekitError::UnsavedPlace`] if `place_id` is `None`: a place
/// must be saved (and so hold a server-assigned id) before its submissions
/// can be addressed. Guarding here prevents orphaned submissions server-side.
pub fn submission_collection(
    place_id: Option<PlaceId>,
    submission_type: &str,
) -> PlacekitResult<String> {
    let place_id = place_id.ok_or_else(|| PlacekitError::UnsavedPlace {
        submission_type: submission_type.to_string(),
    })?;
    Ok(format!("/api/places/{place_id}/{submission_type}/"))
}

/// Returns the path for a single submission within a place's collection.
///
/// # Errors
///
/// Returns [`PlacekitError::UnsavedPlace`] if `place_id` is `None`.
pub fn submission_instance(
    place_id: Option<PlaceId>,
    submission_type: &str,
    submission_id: u64,
) -> PlacekitResult<String> {
    let collection = submission_collection(place_id, submission_type)?;
    Ok(format!("{collection}{submission_id}/"))
}

/// Joins an API root against an absolute collection path, normalizing
/// slashes. An empty root leaves the path same-origin relative.
pub fn join_root(root: &str, path: &str) -> String {
    let root = root.trim_end_matches('/');
    if root.is_empty() {
        path.to_string()
    } else {
        format!("{root}{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_collection_is_constant() {
        assert_eq!(PLACE_COLLECTION, "/api/places/");
    }

    #[test]
    fn test_activity_collection_is_constant() {
        assert_eq!(ACTIVITY_COLLECTION, "/api/activity/");
    }

    #[test]
    fn test_place_instance() {
        assert_eq!(place_instance(12), "/api/places/12/");
    }

    #[test]
    fn test_submission_collection_saved_place() {
        let url = submission_collection(Some(3), "responses").unwrap();
        assert_eq!(url, "/api/places/3/responses/");
    }

    #[test]
    fn test_submission_collection_unsaved_place() {
        let err = submission_collection(None, "support").unwrap_err();
        assert!(matches!(
            err,
            PlacekitError::UnsavedPlace { ref submission_type } if submission_type == "support"
        ));
        assert!(err.to_string().contains("must be saved"));
    }

    #[test]
    fn test_submission_instance() {
        let url = submission_instance(Some(3), "support", 9).unwrap();
        assert_eq!(url, "/api/places/3/support/9/");
    }

    #[test]
    fn test_submission_instance_unsaved_place() {
        assert!(submission_instance(None, "responses", 1).is_err());
    }

    #[test]
    fn test_join_root_empty_stays_relative() {
        assert_eq!(join_root("", PLACE_COLLECTION), "/api/places/");
    }

    #[test]
    fn test_join_root_strips_trailing_slash() {
        assert_eq!(
            join_root("https://api.example.com/", PLACE_COLLECTION),
            "https://api.example.com/api/places/"
        );
    }

    #[test]
    fn test_join_root_plain() {
        assert_eq!(
            join_root("https://api.example.com", ACTIVITY_COLLECTION),
            "https://api.example.com/api/activity/"
        );
    }
}
