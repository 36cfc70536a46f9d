//! Repository trait for database liveness checks.

use crate::error::AppError;
use async_trait::async_trait;

/// Minimal probe used by the health endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Runs a trivial round-trip query.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Backend`] if the database cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
