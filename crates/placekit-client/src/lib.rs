//! # placekit-client
//!
//! Client-side plumbing for a place-mapping REST API: typed entity models,
//! collections that compute endpoint paths from in-memory identifiers, and a
//! request pipeline with a CSRF-token-attaching interceptor.
//!
//! ## Modules
//!
//! - [`models`] - `Place`, `Submission`, `SubmissionSet`, `Activity`
//! - [`collections`] - `PlaceCollection` and `ActivityCollection`
//! - [`routes`] - endpoint path builders
//! - [`request`] - `ApiRequest`, `RequestContext`, and the interceptor chain
//! - [`csrf`] - the CSRF request interceptor
//! - [`cookies`] - cookie-header parsing
//! - [`client`] - `ApiClient` and the `Transport` seam

pub mod client;
pub mod collections;
pub mod cookies;
pub mod csrf;
pub mod models;
pub mod request;
pub mod routes;

// Re-export the most commonly used types at the crate root.
pub use client::{ApiClient, ApiResponse, Transport};
pub use collections::{ActivityCollection, PlaceCollection};
pub use cookies::CookieJar;
pub use csrf::CsrfInterceptor;
pub use models::{Activity, Place, PlaceId, Submission, SubmissionKinds, SubmissionSet, SubmissionSlot};
pub use request::{ApiRequest, Interceptor, InterceptorChain, RequestContext};
