/// Ticket handed out for each edit; only the latest one can settle the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Tracks whether input has been quiet for a full debounce window.
///
/// Every `touch` restarts the window and returns a ticket. The caller arms
/// a timer for that ticket; when it fires, `settle` only takes effect if no
/// newer edit happened in between.
#[derive(Debug, Clone, PartialEq)]
pub struct Debounce {
    generation: u64,
    settled: bool,
}

impl Default for Debounce {
    fn default() -> Self {
        Debounce {
            generation: 0,
            settled: true,
        }
    }
}

impl Debounce {
    pub fn touch(&mut self) -> Ticket {
        self.generation += 1;
        self.settled = false;
        Ticket(self.generation)
    }

    /// Returns true when the ticket was current and the gate is now settled
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.settled = true;
        true
    }

    /// True when no edit happened after `ticket` was issued
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }
}
