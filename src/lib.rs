pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::GatewayConfig;

pub use adapters::{PaymentGatewayClient, SeatBookingClient};
pub use core::service::TicketService;
pub use domain::model::{PurchaseSummary, TicketType, TicketTypeRequest};
pub use utils::error::{Result, TicketError};
