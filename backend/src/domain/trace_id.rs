//! Correlation identifier for one HTTP exchange.
//!
//! The trace middleware scopes a [`TraceId`] around each request. Handlers and
//! error constructors read it back with [`TraceId::current`] so conversion
//! bodies, error envelopes and log events all carry the value echoed in the
//! `trace-id` header. Task-locals do not follow `tokio::spawn`; wrap spawned
//! work in [`TraceId::scope`] again.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use uuid::Uuid;

/// Header carrying the trace identifier, on requests and responses alike.
pub const TRACE_ID_HEADER: &str = "trace-id";

tokio::task_local! {
    static CURRENT: TraceId;
}

/// UUID tying a response to the log events it produced.
///
/// # Examples
/// ```
/// use unit_converter::domain::TraceId;
///
/// let supplied = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
/// assert_eq!(TraceId::adopt_or_generate(Some(supplied)).to_string(), supplied);
/// assert_ne!(TraceId::adopt_or_generate(Some("req-42")).to_string(), "req-42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Mint a random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Keep a caller-supplied identifier when it is a non-nil UUID.
    ///
    /// Anything else is replaced with a fresh identifier so the header never
    /// echoes arbitrary client text.
    #[must_use]
    pub fn adopt_or_generate(supplied: Option<&str>) -> Self {
        supplied
            .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
            .filter(|uuid| !uuid.is_nil())
            .map_or_else(Self::generate, Self)
    }

    /// Identifier of the request being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Drive `fut` with `self` as the current identifier.
    pub async fn scope<Fut: Future>(self, fut: Fut) -> Fut::Output {
        CURRENT.scope(self, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
