//! Link creation and resolution service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::entities::{Link, LinkStatus, NewLink};
use crate::domain::errors::{LinkError, RepositoryError};
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
use crate::utils::url_normalizer::{UrlNormalizationError, normalize_url};

/// Upper bound on insert attempts for a single creation request.
pub const MAX_INSERT_ATTEMPTS: usize = 5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

const URL_REQUIRED: &str = "longUrl is required";
const URL_INVALID: &str = "longUrl must be a valid URL";
const EXPIRY_INVALID: &str = "expiresInDays must be a positive number";
const EXPIRY_TOO_LARGE: &str = "expiresInDays is too large";

/// Result of one insert attempt with one candidate code.
#[derive(Debug)]
enum InsertAttempt {
    Created(Link),
    Collision,
    Fatal(RepositoryError),
}

impl From<Result<Link, RepositoryError>> for InsertAttempt {
    fn from(result: Result<Link, RepositoryError>) -> Self {
        match result {
            Ok(link) => Self::Created(link),
            Err(RepositoryError::UniqueViolation(_)) => Self::Collision,
            Err(e) => Self::Fatal(e),
        }
    }
}

/// Service for creating and resolving short links.
///
/// Holds no mutable state of its own: every request works only on the codes
/// it generated, and concurrent creators racing for the same code are
/// arbitrated by the repository's uniqueness constraint.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    generator: Arc<dyn CodeGenerator>,
    clock: Arc<dyn Clock>,
}

impl LinkService {
    /// Creates a new link service from its collaborators.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        generator: Arc<dyn CodeGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            generator,
            clock,
        }
    }

    /// Creates a service with the random 7-symbol generator and the system clock.
    pub fn with_defaults(repository: Arc<dyn LinkRepository>) -> Self {
        Self::new(
            repository,
            Arc::new(RandomCodeGenerator::default()),
            Arc::new(SystemClock),
        )
    }

    /// Creates a short link for `long_url`.
    ///
    /// `expires_in_days` of `None` creates a permanent link. Fractional days
    /// are honoured with millisecond precision.
    ///
    /// # Code Generation
    ///
    /// Each attempt draws a fresh random code and inserts it. A uniqueness
    /// violation discards the attempt and retries, up to
    /// [`MAX_INSERT_ATTEMPTS`]. Any other storage failure aborts at once.
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidInput`] if the URL is empty or not an absolute
    ///   URL with a host, or the expiry is not a finite positive number.
    ///   Nothing is written.
    /// - [`LinkError::ExhaustedRetries`] if every attempt collided.
    /// - [`LinkError::Storage`] on a non-collision persistence failure.
    pub async fn create_link(
        &self,
        long_url: &str,
        expires_in_days: Option<f64>,
    ) -> Result<Link, LinkError> {
        let long_url = normalize_url(long_url).map_err(|e| match e {
            UrlNormalizationError::Empty => LinkError::invalid_input(URL_REQUIRED),
            _ => LinkError::invalid_input(URL_INVALID),
        })?;

        let now = self.clock.now();
        let expires_at = expiry_from_days(now, expires_in_days)?;

        for attempt in 1..=MAX_INSERT_ATTEMPTS {
            let new_link = NewLink {
                short_code: self.generator.generate(),
                long_url: long_url.clone(),
                expires_at,
                created_at: now,
            };
            let code = new_link.short_code.clone();

            match InsertAttempt::from(self.repository.insert(new_link).await) {
                InsertAttempt::Created(link) => {
                    metrics::counter!("links_created_total").increment(1);
                    info!(
                        code = %link.short_code,
                        expires_at = ?link.expires_at,
                        attempt,
                        "short link created"
                    );
                    return Ok(link);
                }
                InsertAttempt::Collision => {
                    metrics::counter!("link_code_collisions_total").increment(1);
                    warn!(attempt, code = %code, "short code collision, retrying");
                }
                InsertAttempt::Fatal(e) => {
                    tracing::error!(error = %e, attempt, "failed to insert short link");
                    return Err(LinkError::Storage(e));
                }
            }
        }

        tracing::error!(
            attempts = MAX_INSERT_ATTEMPTS,
            "gave up allocating a unique short code"
        );
        Err(LinkError::ExhaustedRetries {
            attempts: MAX_INSERT_ATTEMPTS,
        })
    }

    /// Resolves a short code to its stored long URL.
    ///
    /// Read-only: expired links are reported, never removed.
    ///
    /// # Errors
    ///
    /// - [`LinkError::NotFound`] if no link has this code.
    /// - [`LinkError::Expired`] if the link's expiry is at or before now.
    /// - [`LinkError::Storage`] on persistence failures.
    pub async fn resolve_link(&self, code: &str) -> Result<String, LinkError> {
        let result = self.lookup(code).await.and_then(|link| {
            match link.status_at(self.clock.now()) {
                LinkStatus::Active => Ok(link.long_url),
                LinkStatus::Expired => Err(LinkError::Expired(code.to_string())),
            }
        });

        let outcome = match &result {
            Ok(_) => "redirected",
            Err(LinkError::NotFound(_)) => "not_found",
            Err(LinkError::Expired(_)) => "expired",
            Err(_) => "error",
        };
        metrics::counter!("link_resolutions_total", "outcome" => outcome).increment(1);
        debug!(code, outcome, "short link resolved");

        result
    }

    /// Retrieves the stored link for a short code without checking expiry.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no link has this code.
    /// Returns [`LinkError::Storage`] on persistence failures.
    pub async fn find_link(&self, code: &str) -> Result<Link, LinkError> {
        self.lookup(code).await
    }

    /// Reports whether the underlying storage is reachable.
    pub async fn storage_healthy(&self) -> bool {
        self.repository.health_check().await
    }

    /// Constructs the public short URL from a base address and a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    async fn lookup(&self, code: &str) -> Result<Link, LinkError> {
        self.repository
            .find_by_code(code)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, code, "failed to look up short link");
                LinkError::Storage(e)
            })?
            .ok_or_else(|| LinkError::NotFound(code.to_string()))
    }
}

/// Computes the absolute expiry for a request made at `now`.
///
/// The result is always strictly after `now`.
fn expiry_from_days(
    now: DateTime<Utc>,
    expires_in_days: Option<f64>,
) -> Result<Option<DateTime<Utc>>, LinkError> {
    let Some(days) = expires_in_days else {
        return Ok(None);
    };

    if !days.is_finite() || days <= 0.0 {
        return Err(LinkError::invalid_input(EXPIRY_INVALID));
    }

    let millis = (days * MILLIS_PER_DAY).round() as i64;
    let expires_at = Duration::try_milliseconds(millis)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(|| LinkError::invalid_input(EXPIRY_TOO_LARGE))?;

    if expires_at <= now {
        return Err(LinkError::invalid_input(EXPIRY_INVALID));
    }

    Ok(Some(expires_at))
}
