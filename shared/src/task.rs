use derive_more::{Display, From};
use strum_macros::Display as PhaseDisplay;

const VALIDATING_MESSAGE: &str = "Checking input...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PhaseDisplay)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Succeeded | Phase::Failed)
    }
}

/// Identifies one submission. Completions carrying an older ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From)]
#[display(fmt = "#{}", _0)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Error,
}

/// Phase, status line and in-flight bookkeeping for one controller.
///
/// At most one ticket is outstanding at a time; `start` refuses to hand out a
/// second one until the first has been settled or cancelled.
#[derive(Debug, Default)]
pub struct Task {
    phase: Phase,
    message: Option<String>,
    issued: u64,
    in_flight: Option<Ticket>,
}

impl Task {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<Ticket> {
        self.in_flight
    }

    pub fn tone(&self) -> StatusTone {
        match self.phase {
            Phase::Failed => StatusTone::Error,
            _ => StatusTone::Info,
        }
    }

    fn transition(&mut self, next: Phase, message: Option<String>) {
        log::debug!("task phase {} -> {}", self.phase, next);
        self.phase = next;
        self.message = message;
    }

    /// User touched the inputs. A settled task goes back to Idle.
    pub(crate) fn touch(&mut self) {
        if self.phase.is_terminal() {
            self.transition(Phase::Idle, None);
        }
    }

    /// Entry point of every submit. Returns false while a request is outstanding.
    pub(crate) fn begin(&mut self) -> bool {
        if let Some(ticket) = self.in_flight {
            log::warn!("submit ignored, request {} still in flight", ticket);
            return false;
        }

        self.touch();
        self.transition(Phase::Validating, Some(VALIDATING_MESSAGE.to_string()));
        true
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.transition(Phase::Failed, Some(message.into()));
    }

    pub(crate) fn succeed(&mut self, message: impl Into<String>) {
        self.transition(Phase::Succeeded, Some(message.into()));
    }

    pub(crate) fn start(&mut self) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.in_flight = Some(ticket);
        self.transition(Phase::Submitting, None);
        ticket
    }

    /// Claims the completion for `ticket`. False means it is stale and must be ignored.
    pub(crate) fn settle(&mut self, ticket: Ticket) -> bool {
        if self.in_flight != Some(ticket) {
            log::debug!("dropping stale completion {}", ticket);
            return false;
        }

        self.in_flight = None;
        true
    }

    pub(crate) fn cancel(&mut self) -> Option<Ticket> {
        let ticket = self.in_flight.take()?;
        log::info!("request {} cancelled", ticket);
        self.transition(Phase::Idle, None);
        Some(ticket)
    }
}
