use std::time::Duration;

use metro_core::MetroError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] MetroError),

    /// A background loop failed to exit within the shutdown grace period.
    #[error("shutdown timed out after {0:?}")]
    ShutdownTimeout(Duration),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
