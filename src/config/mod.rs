pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::{TicketType, TicketTypeRequest};
#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cinema-tickets")]
#[command(about = "Purchase cinema tickets through the seat booking and payment gateways")]
pub struct CliConfig {
    /// Account making the purchase.
    #[arg(long)]
    pub account_id: i64,

    #[arg(long, default_value = "1")]
    pub adults: u32,

    #[arg(long, default_value = "0")]
    pub children: u32,

    #[arg(long, default_value = "0")]
    pub infants: u32,

    #[arg(long, default_value = "http://localhost:8081/payments")]
    pub payment_endpoint: String,

    #[arg(long, default_value = "http://localhost:8082/reservations")]
    pub reservation_endpoint: String,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    /// Optional TOML file overriding the gateway settings.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Request lines for the composition given on the command line.
    /// Zero-count categories are skipped.
    pub fn ticket_requests(&self) -> Vec<TicketTypeRequest> {
        [
            (TicketType::Adult, self.adults),
            (TicketType::Child, self.children),
            (TicketType::Infant, self.infants),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(ticket_type, count)| TicketTypeRequest::new(ticket_type, count))
        .collect()
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn payment_endpoint(&self) -> &str {
        &self.payment_endpoint
    }

    fn reservation_endpoint(&self) -> &str {
        &self.reservation_endpoint
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("payment_endpoint", &self.payment_endpoint)?;
        validate_url("reservation_endpoint", &self.reservation_endpoint)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
