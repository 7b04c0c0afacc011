use serde::{Deserialize, Serialize};

/// Ticket categories sold at the box office.
///
/// The set is closed: every ticket is exactly one of these, and pricing and
/// seating rules match on all three variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    /// Unit price in whole currency units. Infants travel free.
    pub fn price(&self) -> u32 {
        match self {
            TicketType::Adult => 20,
            TicketType::Child => 10,
            TicketType::Infant => 0,
        }
    }
}

/// One line of a purchase: how many tickets of a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    no_of_tickets: u32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, no_of_tickets: u32) -> Self {
        Self {
            ticket_type,
            no_of_tickets,
        }
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn no_of_tickets(&self) -> u32 {
        self.no_of_tickets
    }

    pub fn total_cost(&self) -> u32 {
        self.no_of_tickets.saturating_mul(self.ticket_type.price())
    }
}

/// Per-category totals over a request list, computed in one pass before any
/// business rule runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurchaseSummary {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    pub total_cost: u32,
}

impl PurchaseSummary {
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        let mut summary = Self::default();

        for request in requests {
            let count = request.no_of_tickets();
            // Saturate instead of overflowing on absurd counts; the
            // 20-ticket cap rejects those purchases anyway.
            match request.ticket_type() {
                TicketType::Adult => summary.adults = summary.adults.saturating_add(count),
                TicketType::Child => summary.children = summary.children.saturating_add(count),
                TicketType::Infant => summary.infants = summary.infants.saturating_add(count),
            }
            summary.total_cost = summary.total_cost.saturating_add(request.total_cost());
        }

        summary
    }

    pub fn total_tickets(&self) -> u32 {
        self.adults
            .saturating_add(self.children)
            .saturating_add(self.infants)
    }

    /// Seats that must physically exist. Infants sit on an adult's lap and
    /// take no seat of their own.
    pub fn seats(&self) -> u32 {
        self.adults.saturating_add(self.children)
    }
}
