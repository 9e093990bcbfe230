//! CSRF token attachment for outgoing requests.
//!
//! State-changing requests to the page's own origin carry the CSRF token the
//! server previously handed out in a cookie. The interceptor reads the token
//! from the injected cookie store and sets it as a request header. Safe
//! methods are left alone, and the token is never attached to a cross-origin
//! request.

use http::{HeaderName, HeaderValue, Method};
use placekit_core::settings::CsrfSettings;
use placekit_core::{PlacekitError, PlacekitResult};

use crate::request::{ApiRequest, Interceptor, RequestContext};

/// Returns `true` for methods that do not change server state.
///
/// The safe set is `GET`, `HEAD`, `OPTIONS`, `TRACE`.
pub const fn is_safe_method(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::OPTIONS | Method::TRACE
    )
}

/// Returns `true` if `url` targets the given origin.
///
/// `origin` is the page's `scheme://host[:port]`. A URL is same-origin when
/// it equals the origin (or extends it past a `/`), equals the
/// scheme-relative `//host[:port]` form (or extends it past a `/`), or is
/// neither absolute nor scheme relative, i.e. a plain relative URL.
pub fn same_origin(url: &str, origin: &str) -> bool {
    if url == origin || url.strip_prefix(origin).is_some_and(|rest| rest.starts_with('/')) {
        return true;
    }

    // "//host[:port]" — scheme relative to the page's own host.
    if let Some((_scheme, host)) = origin.split_once("//") {
        let scheme_relative = format!("//{host}");
        if url == scheme_relative
            || url
                .strip_prefix(scheme_relative.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
        {
            return true;
        }
    }

    !(url.starts_with("//") || url.starts_with("http:") || url.starts_with("https:"))
}

/// Interceptor that attaches the CSRF token header to unsafe, same-origin
/// requests.
#[derive(Debug, Clone)]
pub struct CsrfInterceptor {
    cookie_name: String,
    header_name: HeaderName,
}

impl CsrfInterceptor {
    /// Creates an interceptor with the conventional cookie and header names
    /// (`csrftoken` / `X-CSRFToken`).
    pub fn new() -> Self {
        Self {
            cookie_name: "csrftoken".to_string(),
            header_name: HeaderName::from_static("x-csrftoken"),
        }
    }

    /// Creates an interceptor from CSRF settings.
    ///
    /// # Errors
    ///
    /// Returns [`PlacekitError::InvalidHeader`] if the configured header
    /// name is not a legal header name.
    pub fn from_settings(settings: &CsrfSettings) -> PlacekitResult<Self> {
        let header_name: HeaderName = settings
            .header_name
            .parse()
            .map_err(|e| PlacekitError::InvalidHeader(format!("{}: {e}", settings.header_name)))?;
        Ok(Self {
            cookie_name: settings.cookie_name.clone(),
            header_name,
        })
    }

    /// The name of the cookie the token is read from.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// The name of the header the token is attached as.
    pub const fn header_name(&self) -> &HeaderName {
        &self.header_name
    }
}

impl Default for CsrfInterceptor {
    fn default() -> Self {
        Self::new()
    }
}

impl Interceptor for CsrfInterceptor {
    fn name(&self) -> &str {
        "csrf"
    }

    fn process(&self, request: &mut ApiRequest, context: &RequestContext) -> PlacekitResult<()> {
        if is_safe_method(request.method()) {
            return Ok(());
        }

        if !same_origin(request.url(), context.origin()) {
            // The token must not leak to other origins.
            return Ok(());
        }

        // A missing cookie is tolerated: the header is attached with an
        // empty value and the server's CSRF validation rejects the request.
        let token = context.cookies().get(&self.cookie_name).unwrap_or_default();
        let value = HeaderValue::from_str(&token)
            .map_err(|e| PlacekitError::InvalidHeader(format!("csrf token: {e}")))?;

        tracing::trace!(url = request.url(), "attaching csrf header");
        request.headers_mut().insert(self.header_name.clone(), value);
        Ok(())
    }
}
