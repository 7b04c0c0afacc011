use crate::domain::ports::{ConfigProvider, SeatReservationService};
use crate::utils::error::{Result, TicketError};
use reqwest::Client;
use std::time::Duration;

/// HTTP client for the third-party seat booking service.
pub struct SeatBookingClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> SeatBookingClient<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        Ok(Self { config, client })
    }
}

impl<C: ConfigProvider> SeatReservationService for SeatBookingClient<C> {
    async fn reserve_seat(&self, account_id: i64, total_seats: u32) -> Result<()> {
        let payload = serde_json::json!({
            "account_id": account_id,
            "total_seats": total_seats,
            "requested_at": chrono::Utc::now().to_rfc3339(),
        });

        tracing::debug!(
            "Reserving {} seat(s) for account {} via {}",
            total_seats,
            account_id,
            self.config.reservation_endpoint()
        );
        let response = self
            .client
            .post(self.config.reservation_endpoint())
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TicketError::GatewayRejectedError {
                service: "seat-booking",
                status: response.status().as_u16(),
            });
        }

        tracing::debug!(account_id, total_seats, "seats reserved");
        Ok(())
    }
}
