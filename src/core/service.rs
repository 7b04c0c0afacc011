use crate::domain::model::{PurchaseSummary, TicketTypeRequest};
use crate::domain::ports::{SeatReservationService, TicketPaymentService};
use crate::utils::error::{Result, TicketError};

const MAX_TICKETS_PER_PURCHASE: u32 = 20;

/// Validates a purchase and dispatches it to the seat booking and payment
/// gateways. Every business check runs before either gateway is touched, so
/// a rejected purchase leaves no partial state behind.
pub struct TicketService<P: TicketPaymentService, R: SeatReservationService> {
    payment: P,
    reservation: R,
}

impl<P: TicketPaymentService, R: SeatReservationService> TicketService<P, R> {
    pub fn new(payment: P, reservation: R) -> Self {
        Self {
            payment,
            reservation,
        }
    }

    /// Purchase tickets for an account.
    ///
    /// `account_id` and `requests` mirror a nullable calling convention:
    /// absence is a validation failure, never a panic. On success, seats are
    /// reserved strictly before payment is taken.
    pub async fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        requests: Option<&[TicketTypeRequest]>,
    ) -> Result<()> {
        let (account_id, requests) = Self::require_inputs(account_id, requests)?;

        let summary = PurchaseSummary::from_requests(requests);
        Self::check_purchase_rules(account_id, &summary)?;

        tracing::debug!(
            account_id,
            seats = summary.seats(),
            total_cost = summary.total_cost,
            "purchase validated"
        );

        self.reservation
            .reserve_seat(account_id, summary.seats())
            .await?;
        self.payment
            .make_payment(account_id, summary.total_cost)
            .await?;

        tracing::info!(
            account_id,
            tickets = summary.total_tickets(),
            "purchase complete"
        );
        Ok(())
    }

    fn require_inputs<'a>(
        account_id: Option<i64>,
        requests: Option<&'a [TicketTypeRequest]>,
    ) -> Result<(i64, &'a [TicketTypeRequest])> {
        let account_id = account_id
            .ok_or_else(|| TicketError::invalid_purchase("accountId must not be null"))?;
        let requests = requests
            .ok_or_else(|| TicketError::invalid_purchase("ticketTypeRequests must not be null"))?;
        Ok((account_id, requests))
    }

    // Checks run in a fixed order over the precomputed totals so the
    // reported reason is deterministic for a given input.
    fn check_purchase_rules(account_id: i64, summary: &PurchaseSummary) -> Result<()> {
        if account_id <= 0 {
            return Err(TicketError::invalid_purchase(
                "accountId must be greater than 0.",
            ));
        }
        if summary.adults < 1 {
            return Err(TicketError::invalid_purchase(
                "At least 1 adult ticket must be purchased.",
            ));
        }
        if summary.total_tickets() > MAX_TICKETS_PER_PURCHASE {
            return Err(TicketError::invalid_purchase(
                "Must purchase between 1 and 20 tickets.",
            ));
        }
        if summary.infants > summary.adults {
            return Err(TicketError::invalid_purchase(
                "Must have at least 1 adult per infant.",
            ));
        }
        Ok(())
    }
}
