//! Single-slot timers and request generations.
//!
//! Neither type owns a clock. The UI sleeps for the delay and then asks the
//! slot whether its ticket is still the armed one, so scheduling a new task
//! implicitly cancels the previous task of the same slot.

/// Handle to one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTicket(u64);

/// At most one pending task per slot.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TimerSlot {
    issued: u64,
    armed: Option<u64>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the slot, replacing any pending task.
    pub fn schedule(&mut self) -> SlotTicket {
        self.issued += 1;
        self.armed = Some(self.issued);
        SlotTicket(self.issued)
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }

    pub fn is_pending(&self) -> bool {
        self.armed.is_some()
    }

    /// Called when a ticket's delay elapses. Returns `true` (and disarms the
    /// slot) only if the ticket is still the armed one.
    pub fn fire(&mut self, ticket: SlotTicket) -> bool {
        if self.armed == Some(ticket.0) {
            self.armed = None;
            true
        } else {
            false
        }
    }
}

/// Generation of one issued search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Tracks which search is the latest so stale completions can be dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequestGate {
    issued: u64,
    settled: u64,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> Generation {
        self.issued += 1;
        Generation(self.issued)
    }

    pub fn latest(&self) -> Generation {
        Generation(self.issued)
    }

    pub fn is_latest(&self, gen: Generation) -> bool {
        gen.0 == self.issued
    }

    /// Record a completion. Returns `true` when the completion belongs to the
    /// latest search and should be applied.
    pub fn settle(&mut self, gen: Generation) -> bool {
        if self.is_latest(gen) {
            self.settled = gen.0;
            true
        } else {
            false
        }
    }

    /// A search is outstanding while the latest generation has not settled.
    pub fn is_busy(&self) -> bool {
        self.settled < self.issued
    }
}
