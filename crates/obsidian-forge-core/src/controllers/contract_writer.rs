use crate::controllers::{begin_submit, settle, Outcome, ValidationError};
use crate::dispatch::{Dispatch, RemoteCall, WorkflowId};
use crate::domain::{ContractRequest, GeneratedContract};
use crate::notify::NotificationSink;
use crate::ports::RemoteError;
use crate::state_machine::{Phase, Resolution, Ticket, Workflow, WorkflowState};

pub const EXAMPLE_PROMPTS: &[&str] = &[
    "Create a simple NFT collection contract with 10,000 max supply",
    "Build a staking contract that rewards users with tokens",
    "Generate a multisig wallet contract requiring 2 of 3 signatures",
    "Create a lottery contract where users buy tickets with ETH",
];

const OUTCOME: Outcome = Outcome {
    success: "Smart contract generated successfully!",
    failure: "Failed to generate contract. Please try again.",
};

#[derive(Debug)]
pub struct ContractWriterController {
    description: String,
    workflow: Workflow<GeneratedContract>,
    sink: NotificationSink,
}

impl ContractWriterController {
    pub fn new(sink: NotificationSink) -> Self {
        Self {
            description: String::new(),
            workflow: Workflow::new("contract_writer"),
            sink,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn description_mut(&mut self) -> &mut String {
        &mut self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replace the description with example `index`. Returns false for an
    /// unknown index, leaving the description untouched.
    pub fn select_example(&mut self, index: usize) -> bool {
        match EXAMPLE_PROMPTS.get(index) {
            Some(prompt) => {
                self.description = (*prompt).to_owned();
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> &WorkflowState<GeneratedContract> {
        self.workflow.state()
    }

    pub fn phase(&self) -> Phase {
        self.workflow.phase()
    }

    pub fn can_submit(&self) -> bool {
        !self.workflow.state().is_submitting() && !self.description.trim().is_empty()
    }

    pub fn submit(&mut self) -> Option<Dispatch> {
        let description = self.description.clone();
        begin_submit(WorkflowId::ContractWriter, &mut self.workflow, &self.sink, || {
            if description.trim().is_empty() {
                return Err(ValidationError::MissingDescription);
            }
            Ok(RemoteCall::GenerateContract(ContractRequest { description }))
        })
    }

    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<GeneratedContract, RemoteError>,
    ) -> Resolution {
        settle(&mut self.workflow, &self.sink, ticket, result, OUTCOME)
    }

    pub fn generated(&self) -> Option<&GeneratedContract> {
        self.workflow.state().succeeded()
    }

    /// "Generate another": drop the result and clear the description.
    pub fn reset(&mut self) {
        self.description.clear();
        self.workflow.reset();
    }
}
