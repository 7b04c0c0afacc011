use crate::domain::ports::{ConfigProvider, TicketPaymentService};
use crate::utils::error::{Result, TicketError};
use reqwest::Client;
use std::time::Duration;

/// HTTP client for the third-party payment gateway.
pub struct PaymentGatewayClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> PaymentGatewayClient<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        Ok(Self { config, client })
    }
}

impl<C: ConfigProvider> TicketPaymentService for PaymentGatewayClient<C> {
    async fn make_payment(&self, account_id: i64, total_amount: u32) -> Result<()> {
        let payload = serde_json::json!({
            "account_id": account_id,
            "total_amount": total_amount,
            "requested_at": chrono::Utc::now().to_rfc3339(),
        });

        tracing::debug!(
            "Charging account {} via {}",
            account_id,
            self.config.payment_endpoint()
        );
        let response = self
            .client
            .post(self.config.payment_endpoint())
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TicketError::GatewayRejectedError {
                service: "payment",
                status: response.status().as_u16(),
            });
        }

        tracing::debug!(account_id, total_amount, "payment accepted");
        Ok(())
    }
}
