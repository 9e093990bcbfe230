//! The outgoing request type, request context, and interceptor chain.
//!
//! Interceptors run once per outgoing request, in registration order, before
//! the transport sees it. They may mutate headers only, and receive the
//! page's [`RequestContext`] explicitly rather than reading ambient state.

use http::{HeaderMap, HeaderValue, Method};
use placekit_core::{PlacekitError, PlacekitResult};
use url::Url;

use crate::cookies::CookieJar;

/// An outgoing API request, before it is handed to the transport.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    url: String,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Starts building a request.
    pub fn builder(method: Method, url: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Shorthand for a bodyless GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// The request method.
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// The request URL. May be absolute, scheme relative, or path relative.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The request headers.
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The request headers, mutably. This is the only part of a request an
    /// interceptor may change.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// The request body, if any.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

/// Builder for [`ApiRequest`].
#[derive(Debug)]
pub struct ApiRequestBuilder {
    method: Method,
    url: String,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl ApiRequestBuilder {
    /// Adds a header.
    ///
    /// # Errors
    ///
    /// Returns [`PlacekitError::InvalidHeader`] if the name or value is not
    /// a legal header.
    pub fn header(mut self, name: &str, value: &str) -> PlacekitResult<Self> {
        let name: http::HeaderName = name
            .parse()
            .map_err(|e| PlacekitError::InvalidHeader(format!("{name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| PlacekitError::InvalidHeader(format!("{name}: {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Serializes `payload` as the JSON body and sets the content type.
    ///
    /// # Errors
    ///
    /// Returns [`PlacekitError::SerializationError`] if serialization fails.
    pub fn json_body<T: serde::Serialize>(mut self, payload: &T) -> PlacekitResult<Self> {
        let bytes = serde_json::to_vec(payload)
            .map_err(|e| PlacekitError::SerializationError(e.to_string()))?;
        self.headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        self.body = Some(bytes);
        Ok(self)
    }

    /// Finishes the builder.
    pub fn build(self) -> ApiRequest {
        ApiRequest {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

/// The page-side state interceptors consult: the page origin and the cookie
/// store, injected explicitly.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    origin: String,
    cookies: CookieJar,
}

impl RequestContext {
    /// Creates a context from an origin (`scheme://host[:port]`, no trailing
    /// slash) and a cookie jar.
    pub fn new(origin: impl Into<String>, cookies: CookieJar) -> Self {
        Self {
            origin: origin.into(),
            cookies,
        }
    }

    /// Derives a context from a full page URL, keeping only the origin.
    ///
    /// # Errors
    ///
    /// Returns [`PlacekitError::ConfigurationError`] if `page_url` is not an
    /// absolute URL.
    pub fn for_page(page_url: &str, cookies: CookieJar) -> PlacekitResult<Self> {
        let parsed = Url::parse(page_url)
            .map_err(|e| PlacekitError::ConfigurationError(format!("bad page url: {e}")))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| PlacekitError::ConfigurationError("page url has no host".into()))?;

        let origin = match parsed.port() {
            Some(port) => format!("{}://{host}:{port}", parsed.scheme()),
            None => format!("{}://{host}", parsed.scheme()),
        };
        Ok(Self::new(origin, cookies))
    }

    /// The page origin (`scheme://host[:port]`).
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The cookie store.
    pub const fn cookies(&self) -> &CookieJar {
        &self.cookies
    }

    /// The cookie store, mutably.
    pub fn cookies_mut(&mut self) -> &mut CookieJar {
        &mut self.cookies
    }
}

/// A hook that runs on every outgoing request before transmission.
pub trait Interceptor: Send + Sync {
    /// A short identifier, used in trace output.
    fn name(&self) -> &str;

    /// Inspects the request and optionally mutates its headers.
    ///
    /// # Errors
    ///
    /// Interceptors fail only on programmer-facing misconfiguration (e.g. a
    /// token that cannot be encoded as a header value).
    fn process(&self, request: &mut ApiRequest, context: &RequestContext) -> PlacekitResult<()>;
}

/// An ordered chain of interceptors.
#[derive(Default)]
pub struct InterceptorChain {
    interceptors: Vec<Box<dyn Interceptor>>,
}

impl InterceptorChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interceptor to the chain.
    pub fn push(&mut self, interceptor: Box<dyn Interceptor>) {
        self.interceptors.push(interceptor);
    }

    /// Runs every interceptor against the request, in order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first interceptor error.
    pub fn run(&self, request: &mut ApiRequest, context: &RequestContext) -> PlacekitResult<()> {
        for interceptor in &self.interceptors {
            tracing::trace!(interceptor = interceptor.name(), url = request.url(), "running interceptor");
            interceptor.process(request, context)?;
        }
        Ok(())
    }

    /// The number of interceptors in the chain.
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }
}

impl std::fmt::Debug for InterceptorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterceptorChain")
            .field(
                "interceptors",
                &self
                    .interceptors
                    .iter()
                    .map(|i| i.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
