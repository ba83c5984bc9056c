use crate::controllers::{begin_submit, settle, Outcome, ValidationError};
use crate::dispatch::{Dispatch, RemoteCall, WorkflowId};
use crate::domain::{GeneratedToken, TokenSpec};
use crate::notify::NotificationSink;
use crate::ports::RemoteError;
use crate::state_machine::{Phase, Resolution, Ticket, Workflow, WorkflowState};

pub const MAX_SYMBOL_CHARS: usize = 5;
pub const DEFAULT_DECIMALS: &str = "18";

/// Static feature list shown beside the preview.
pub const TOKEN_FEATURES: &[&str] = &[
    "ERC-20 Standard",
    "OpenZeppelin Contracts",
    "Ownable & Mintable",
    "Production Ready",
];

const OUTCOME: Outcome = Outcome {
    success: "Token contract generated successfully!",
    failure: "Failed to create token",
};

/// Upper-case and cut to [`MAX_SYMBOL_CHARS`]. Applied on every edit so the
/// preview and the request always agree.
pub fn normalize_symbol(raw: &str) -> String {
    raw.to_uppercase().chars().take(MAX_SYMBOL_CHARS).collect()
}

/// `1234567` -> `"1,234,567"`.
pub fn format_supply(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPreview {
    pub name: String,
    pub symbol: String,
    pub total_supply: String,
}

#[derive(Debug)]
pub struct TokenCreatorController {
    name: String,
    symbol: String,
    total_supply: String,
    decimals: String,
    workflow: Workflow<GeneratedToken>,
    sink: NotificationSink,
}

impl TokenCreatorController {
    pub fn new(sink: NotificationSink) -> Self {
        Self {
            name: String::new(),
            symbol: String::new(),
            total_supply: String::new(),
            decimals: DEFAULT_DECIMALS.to_owned(),
            workflow: Workflow::new("token_creator"),
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn set_symbol(&mut self, raw: &str) {
        self.symbol = normalize_symbol(raw);
    }

    pub fn total_supply(&self) -> &str {
        &self.total_supply
    }

    pub fn total_supply_mut(&mut self) -> &mut String {
        &mut self.total_supply
    }

    pub fn set_total_supply(&mut self, value: impl Into<String>) {
        self.total_supply = value.into();
    }

    pub fn decimals(&self) -> &str {
        &self.decimals
    }

    pub fn decimals_mut(&mut self) -> &mut String {
        &mut self.decimals
    }

    pub fn set_decimals(&mut self, value: impl Into<String>) {
        self.decimals = value.into();
    }

    pub fn state(&self) -> &WorkflowState<GeneratedToken> {
        self.workflow.state()
    }

    pub fn phase(&self) -> Phase {
        self.workflow.phase()
    }

    pub fn is_submitting(&self) -> bool {
        self.workflow.state().is_submitting()
    }

    pub fn preview(&self) -> TokenPreview {
        let name = self.name.trim();
        TokenPreview {
            name: if name.is_empty() {
                "Token Name".to_owned()
            } else {
                name.to_owned()
            },
            symbol: if self.symbol.is_empty() {
                "SYMBOL".to_owned()
            } else {
                self.symbol.clone()
            },
            total_supply: self
                .total_supply
                .trim()
                .parse::<u64>()
                .map(format_supply)
                .unwrap_or_else(|_| "0".to_owned()),
        }
    }

    /// Parse the form into a request. Numeric fields are parsed here, at
    /// submission time, and never coerced.
    pub fn spec(&self) -> Result<TokenSpec, ValidationError> {
        let name = self.name.trim();
        let supply = self.total_supply.trim();
        if name.is_empty() || self.symbol.is_empty() || supply.is_empty() {
            return Err(ValidationError::MissingTokenFields);
        }
        let total_supply: u64 = supply
            .parse()
            .map_err(|_| ValidationError::InvalidTotalSupply)?;
        if total_supply == 0 {
            return Err(ValidationError::ZeroTotalSupply);
        }
        let decimals: u8 = self
            .decimals
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidDecimals)?;
        Ok(TokenSpec {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            total_supply,
            decimals,
        })
    }

    pub fn submit(&mut self) -> Option<Dispatch> {
        let spec = self.spec();
        begin_submit(WorkflowId::TokenCreator, &mut self.workflow, &self.sink, || {
            spec.map(RemoteCall::CreateToken)
        })
    }

    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<GeneratedToken, RemoteError>,
    ) -> Resolution {
        settle(&mut self.workflow, &self.sink, ticket, result, OUTCOME)
    }

    pub fn generated(&self) -> Option<&GeneratedToken> {
        self.workflow.state().succeeded()
    }

    /// "Create another": drop the result and clear the form.
    pub fn reset(&mut self) {
        self.name.clear();
        self.symbol.clear();
        self.total_supply.clear();
        self.decimals = DEFAULT_DECIMALS.to_owned();
        self.workflow.reset();
    }
}
