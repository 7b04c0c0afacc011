pub mod service;

pub use crate::domain::model::{PurchaseSummary, TicketType, TicketTypeRequest};
pub use crate::domain::ports::{ConfigProvider, SeatReservationService, TicketPaymentService};
pub use crate::utils::error::Result;
pub use service::TicketService;
