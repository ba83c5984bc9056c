use thiserror::Error;

use crate::ports::RemoteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowAction {
    Submit,
    RemoteSuccess,
    RemoteFailure,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTransition {
    pub from: Phase,
    pub to: Phase,
    pub reason: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("illegal workflow transition: {from:?} --{action:?}-->")]
pub struct TransitionError {
    pub from: Phase,
    pub action: WorkflowAction,
}

/// Pure transition table shared by every workflow.
///
/// `Failed` accepts `Submit` like `Idle` does, so a failed request can be
/// retried with the preserved input. `Reset` is accepted from any phase.
pub fn workflow_transition(
    from: Phase,
    action: WorkflowAction,
) -> Result<(Phase, StateTransition), TransitionError> {
    let (to, reason) = match (from, action) {
        (Phase::Idle, WorkflowAction::Submit) => (Phase::Submitting, "submit"),
        (Phase::Failed, WorkflowAction::Submit) => (Phase::Submitting, "retry"),
        (Phase::Submitting, WorkflowAction::RemoteSuccess) => (Phase::Succeeded, "remote_success"),
        (Phase::Submitting, WorkflowAction::RemoteFailure) => (Phase::Failed, "remote_failure"),
        (_, WorkflowAction::Reset) => (Phase::Idle, "reset"),
        _ => return Err(TransitionError { from, action }),
    };
    Ok((to, StateTransition { from, to, reason }))
}

/// Tagged workflow state. The success payload is owned here and nowhere
/// else, so leaving `Succeeded` drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState<T> {
    Idle,
    Submitting,
    Succeeded(T),
    Failed(String),
}

impl<T> WorkflowState<T> {
    pub fn phase(&self) -> Phase {
        match self {
            WorkflowState::Idle => Phase::Idle,
            WorkflowState::Submitting => Phase::Submitting,
            WorkflowState::Succeeded(_) => Phase::Succeeded,
            WorkflowState::Failed(_) => Phase::Failed,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, WorkflowState::Submitting)
    }

    pub fn succeeded(&self) -> Option<&T> {
        match self {
            WorkflowState::Succeeded(value) => Some(value),
            _ => None,
        }
    }
}

/// Request token handed out on submit. A completion carrying a ticket from
/// an older generation is stale and must not touch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Succeeded,
    Failed,
    Stale,
}

#[derive(Debug)]
pub struct Workflow<T> {
    name: &'static str,
    state: WorkflowState<T>,
    generation: u64,
}

impl<T> Workflow<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: WorkflowState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &WorkflowState<T> {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn begin(&mut self) -> Result<Ticket, TransitionError> {
        let (to, transition) = workflow_transition(self.phase(), WorkflowAction::Submit)?;
        debug_assert_eq!(to, Phase::Submitting);
        self.generation = self.generation.wrapping_add(1);
        self.state = WorkflowState::Submitting;
        self.log(&transition);
        Ok(Ticket {
            generation: self.generation,
        })
    }

    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, RemoteError>) -> Resolution {
        if ticket.generation != self.generation || !self.state.is_submitting() {
            tracing::debug!(
                workflow = self.name,
                ticket = ticket.generation,
                current = self.generation,
                "dropping stale completion"
            );
            return Resolution::Stale;
        }
        match result {
            Ok(value) => {
                if let Ok((_, transition)) =
                    workflow_transition(Phase::Submitting, WorkflowAction::RemoteSuccess)
                {
                    self.log(&transition);
                }
                self.state = WorkflowState::Succeeded(value);
                Resolution::Succeeded
            }
            Err(err) => {
                tracing::warn!(workflow = self.name, error = %err, "remote call failed");
                if let Ok((_, transition)) =
                    workflow_transition(Phase::Submitting, WorkflowAction::RemoteFailure)
                {
                    self.log(&transition);
                }
                self.state = WorkflowState::Failed(err.0);
                Resolution::Failed
            }
        }
    }

    /// Return to `Idle` from any phase. Bumps the generation so an in-flight
    /// completion is treated as stale.
    pub fn reset(&mut self) {
        let from = self.phase();
        self.generation = self.generation.wrapping_add(1);
        self.state = WorkflowState::Idle;
        if let Ok((_, transition)) = workflow_transition(from, WorkflowAction::Reset) {
            self.log(&transition);
        }
    }

    fn log(&self, transition: &StateTransition) {
        tracing::debug!(
            workflow = self.name,
            from = ?transition.from,
            to = ?transition.to,
            reason = transition.reason,
            generation = self.generation,
            "workflow transition"
        );
    }
}
