use std::fmt;
use std::panic::Location;
use tracing::error;

/// Diagnostic context handed to a failure hook when a contract check trips.
#[derive(Debug)]
pub struct Violation<'a> {
    /// Source location of the call that violated the contract.
    pub location: &'static Location<'static>,

    /// Text of the condition that failed.
    pub condition: &'a str,

    /// Human-readable explanation.
    pub message: &'a str,
}

impl fmt::Display for Violation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] at {}",
            self.message, self.condition, self.location
        )
    }
}

/// Receives programmer-contract violations.
///
/// The default implementation panics; hosts embed their own error model by
/// supplying a different hook through `FlagConfig::with_failure_hook`. When a
/// hook returns instead of aborting, the violated operation degrades to its
/// documented fallback result.
pub trait FailureHook: Send + Sync {
    fn on_contract_violation(&self, violation: &Violation<'_>);
}

// Plain closures work as hooks too.
impl<F> FailureHook for F
where
    F: Fn(&Violation<'_>) + Send + Sync,
{
    fn on_contract_violation(&self, violation: &Violation<'_>) {
        self(violation)
    }
}

/// Default hook: log the full diagnostic context, then panic.
#[derive(Debug, Default)]
pub struct PanicHook;

impl FailureHook for PanicHook {
    fn on_contract_violation(&self, violation: &Violation<'_>) {
        error!("contract violation: {}", violation);
        panic!("contract violation: {}", violation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_display_includes_all_context() {
        let violation = Violation {
            location: Location::caller(),
            condition: "!name.is_empty()",
            message: "feature name cannot be empty",
        };

        let rendered = violation.to_string();
        assert!(rendered.contains("feature name cannot be empty"));
        assert!(rendered.contains("!name.is_empty()"));
        assert!(rendered.contains("hooks.rs"), "expected caller file in: {}", rendered);
    }
}
