use anyhow::Context;
use cinema_tickets::adapters::{PaymentGatewayClient, SeatBookingClient};
use cinema_tickets::domain::ports::ConfigProvider;
use cinema_tickets::utils::{logger, validation::Validate};
use cinema_tickets::{CliConfig, GatewayConfig, TicketError, TicketService, TicketTypeRequest};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting cinema-tickets CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let account_id = config.account_id;
    let requests = config.ticket_requests();
    let total_tickets: u32 = requests.iter().map(|r| r.no_of_tickets()).sum();

    let result = if let Some(path) = &config.config {
        let gateways = GatewayConfig::from_file(path)
            .with_context(|| format!("failed to load gateway config from {}", path))?;
        purchase(gateways, account_id, &requests).await
    } else {
        purchase(config.clone(), account_id, &requests).await
    };

    match result {
        Ok(()) => {
            tracing::info!("✅ Purchase completed successfully!");
            println!(
                "✅ Purchased {} ticket(s) for account {}",
                total_tickets, account_id
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Purchase failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(exit_code(&e));
        }
    }
}

async fn purchase<C>(
    config: C,
    account_id: i64,
    requests: &[TicketTypeRequest],
) -> cinema_tickets::Result<()>
where
    C: ConfigProvider + Validate + Clone,
{
    config.validate()?;

    let payment = PaymentGatewayClient::new(config.clone())?;
    let reservation = SeatBookingClient::new(config)?;
    let service = TicketService::new(payment, reservation);

    service
        .purchase_tickets(Some(account_id), Some(requests))
        .await
}

// Exit codes by failure category: business rejection, gateway trouble,
// everything else (configuration).
fn exit_code(err: &TicketError) -> i32 {
    match err {
        TicketError::InvalidPurchase { .. } => 1,
        TicketError::GatewayRejectedError { .. } | TicketError::GatewayError(_) => 2,
        _ => 3,
    }
}
