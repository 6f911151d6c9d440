//! Build errors for the manager builder.

use thiserror::Error;

/// Errors that can occur when building a transition manager.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No rule engine supplied. Call .rules(engine) or .allow(from, to) before .build()")]
    MissingRuleEngine,
}
