//! The API client: builds requests, runs the interceptor chain, and hands
//! the result to a pluggable transport.
//!
//! The client owns no request lifecycle policy. Retries, aborts, and
//! timeouts belong to whatever [`Transport`] implementation the host wires
//! in; this side only computes endpoints, serializes payloads, and applies
//! the interceptors.

use std::sync::Arc;

use async_trait::async_trait;
use http::{HeaderMap, Method, StatusCode};
use placekit_core::logging;
use placekit_core::settings::Settings;
use placekit_core::{PlacekitError, PlacekitResult};
use serde_json::{Map, Value};

use crate::collections::{ActivityCollection, PlaceCollection};
use crate::csrf::CsrfInterceptor;
use crate::models::{Activity, Place, PlaceId, Submission, SubmissionSlot};
use crate::request::{ApiRequest, Interceptor, InterceptorChain, RequestContext};
use crate::routes;

/// A response as the transport saw it.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ApiResponse {
    /// Creates a response from its parts.
    pub const fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Shorthand for a 200 response with a body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(StatusCode::OK, HeaderMap::new(), body.into())
    }

    /// The response status.
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers.
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw response body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PlacekitError::SerializationError`] if the body is not the
    /// expected shape.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> PlacekitResult<T> {
        serde_json::from_slice(&self.body)
            .map_err(|e| PlacekitError::SerializationError(e.to_string()))
    }
}

/// The seam to the host's HTTP machinery.
///
/// Implementations carry a fully intercepted [`ApiRequest`] to the server
/// and return whatever came back. Tests use an in-memory implementation.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and returns the server's response.
    async fn send(&self, request: ApiRequest) -> PlacekitResult<ApiResponse>;
}

/// The places API client.
pub struct ApiClient {
    root: String,
    activity_limit: Option<u32>,
    context: RequestContext,
    interceptors: InterceptorChain,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Creates a client from settings, with the CSRF interceptor installed.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured CSRF header name is not a legal
    /// header name.
    pub fn from_settings(
        settings: &Settings,
        context: RequestContext,
        transport: Arc<dyn Transport>,
    ) -> PlacekitResult<Self> {
        let mut interceptors = InterceptorChain::new();
        interceptors.push(Box::new(CsrfInterceptor::from_settings(&settings.csrf)?));

        Ok(Self {
            root: settings.api_root.clone(),
            activity_limit: settings.activity_limit,
            context,
            interceptors,
            transport,
        })
    }

    /// Creates a client with an explicit interceptor chain.
    pub fn with_interceptors(
        root: impl Into<String>,
        context: RequestContext,
        interceptors: InterceptorChain,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            root: root.into(),
            activity_limit: None,
            context,
            interceptors,
            transport,
        }
    }

    /// Appends an interceptor to the chain.
    pub fn push_interceptor(&mut self, interceptor: Box<dyn Interceptor>) {
        self.interceptors.push(interceptor);
    }

    /// The API root paths are joined against.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Runs the interceptor chain and hands the request to the transport.
    ///
    /// # Errors
    ///
    /// Returns interceptor errors and transport errors as-is. Non-2xx
    /// responses are returned, not errors; status handling is the caller's.
    pub async fn send(&self, mut request: ApiRequest) -> PlacekitResult<ApiResponse> {
        let span = logging::operation_span(request.method().as_str(), request.url());
        {
            let _guard = span.enter();
            self.interceptors.run(&mut request, &self.context)?;
            tracing::debug!("dispatching request");
        }
        self.transport.send(request).await
    }

    /// Fetches the place collection into `collection`, building each place
    /// through the collection (so kinds propagate) and recording
    /// server-assigned ids. Returns how many places were added.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a response that is not an array of
    /// objects with integer `id`s.
    pub async fn fetch_places(&self, collection: &mut PlaceCollection) -> PlacekitResult<usize> {
        let url = routes::join_root(&self.root, PlaceCollection::url());
        let response = self.send(ApiRequest::get(url)).await?;
        let records: Vec<Value> = response.json()?;

        let count = records.len();
        for record in records {
            let (id, attributes) = split_id(record)?;
            let place = collection.add(attributes);
            if let Some(id) = id {
                place.assign_id(id)?;
            }
        }
        Ok(count)
    }

    /// Creates `place` on the server and records the assigned id, moving
    /// the place from unsaved to saved.
    ///
    /// # Errors
    ///
    /// Fails if the place was already saved, on transport errors, or if the
    /// server's response carries no id.
    pub async fn create_place(&self, place: &mut Place) -> PlacekitResult<PlaceId> {
        let url = routes::join_root(&self.root, PlaceCollection::url());
        let request = ApiRequest::builder(Method::POST, url)
            .json_body(&place.to_payload())?
            .build();
        let response = self.send(request).await?;

        let (id, attributes) = split_id(response.json()?)?;
        let id = id.ok_or_else(|| {
            PlacekitError::SerializationError("create response carried no id".to_string())
        })?;
        place.assign_id(id)?;
        place.attributes = attributes;
        Ok(id)
    }

    /// Fetches one of a place's submission collections into its set.
    /// Returns how many submissions were added.
    ///
    /// # Errors
    ///
    /// Fails with [`PlacekitError::UnsavedPlace`] if the place has no id,
    /// plus the usual transport and shape errors.
    pub async fn fetch_submissions(
        &self,
        place: &mut Place,
        slot: SubmissionSlot,
    ) -> PlacekitResult<usize> {
        let url = routes::join_root(&self.root, &place.submission_endpoint(slot)?);
        let response = self.send(ApiRequest::get(url)).await?;
        let records: Vec<Submission> = response.json()?;

        let count = records.len();
        let set = place.set_mut(slot);
        for record in records {
            set.push(record);
        }
        Ok(count)
    }

    /// Creates a submission in one of a place's sets and appends the saved
    /// record to the set.
    ///
    /// # Errors
    ///
    /// Fails with [`PlacekitError::UnsavedPlace`] if the place has no id —
    /// the guard that keeps orphaned submissions from ever reaching the
    /// server — plus the usual transport and shape errors.
    pub async fn create_submission(
        &self,
        place: &mut Place,
        slot: SubmissionSlot,
        attributes: Map<String, Value>,
    ) -> PlacekitResult<u64> {
        let url = routes::join_root(&self.root, &place.submission_endpoint(slot)?);
        let request = ApiRequest::builder(Method::POST, url)
            .json_body(&Value::Object(attributes))?
            .build();
        let response = self.send(request).await?;

        let saved: Submission = response.json()?;
        let id = saved.id.ok_or_else(|| {
            PlacekitError::SerializationError("create response carried no id".to_string())
        })?;
        place.set_mut(slot).push(saved);
        Ok(id)
    }

    /// Fetches the activity feed into `feed`, applying the configured limit
    /// if any. Returns how many records were added.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a response that is not an array of
    /// activity records.
    pub async fn fetch_activity(&self, feed: &mut ActivityCollection) -> PlacekitResult<usize> {
        let mut url = routes::join_root(&self.root, ActivityCollection::url());
        if let Some(limit) = self.activity_limit {
            url = format!("{url}?limit={limit}");
        }
        let response = self.send(ApiRequest::get(url)).await?;
        let records: Vec<Activity> = response.json()?;

        let count = records.len();
        feed.extend(records);
        Ok(count)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("root", &self.root)
            .field("activity_limit", &self.activity_limit)
            .field("interceptors", &self.interceptors)
            .finish_non_exhaustive()
    }
}

/// Splits a wire record into its server-assigned id and the remaining
/// attribute blob.
fn split_id(record: Value) -> PlacekitResult<(Option<u64>, Map<String, Value>)> {
    let Value::Object(mut attributes) = record else {
        return Err(PlacekitError::SerializationError(
            "expected a JSON object record".to_string(),
        ));
    };

    let id = match attributes.remove("id") {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.as_u64().ok_or_else(|| {
            PlacekitError::SerializationError(format!("non-integer id: {value}"))
        })?),
    };

    Ok((id, attributes))
}
