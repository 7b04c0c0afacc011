// Adapters layer: concrete clients for the external gateways.

pub mod payment;
pub mod seat_booking;

pub use payment::PaymentGatewayClient;
pub use seat_booking::SeatBookingClient;
