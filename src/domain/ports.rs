use crate::utils::error::Result;

/// Third-party payment gateway. Charges are assumed to either succeed or
/// surface their own error; no retries happen on this side.
pub trait TicketPaymentService: Send + Sync {
    fn make_payment(
        &self,
        account_id: i64,
        total_amount: u32,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Third-party seat booking service. Same contract as the payment gateway:
/// side effect only, one call per purchase.
pub trait SeatReservationService: Send + Sync {
    fn reserve_seat(
        &self,
        account_id: i64,
        total_seats: u32,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn payment_endpoint(&self) -> &str;
    fn reservation_endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}
