//! Error type for client operations.

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum MoipError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a status other than 200.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A refund was created or listed before being bound to an order or payment.
    #[error("Refund has no associated order or payment")]
    MissingRefundTarget,
}

impl MoipError {
    /// Returns the upstream status code for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            MoipError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
