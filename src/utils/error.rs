use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicketError {
    #[error("Invalid purchase: {message}")]
    InvalidPurchase { message: String },

    #[error("{service} gateway rejected the request with status {status}")]
    GatewayRejectedError { service: &'static str, status: u16 },

    #[error("Gateway request failed: {0}")]
    GatewayError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl TicketError {
    /// Business-rule failure carrying one of the fixed reason strings.
    pub fn invalid_purchase(message: impl Into<String>) -> Self {
        Self::InvalidPurchase {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TicketError>;
