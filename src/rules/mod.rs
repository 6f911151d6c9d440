//! Generic rule matching.
//!
//! This module knows nothing about states or transitions:
//! - [`Condition`]: a single predicate over a candidate
//! - [`Rule`]: conditions combined with all/any semantics
//! - [`RuleEngine`]: an ordered allow-list of rules
//!
//! Every query takes the candidate as an argument. Nothing here mutates
//! while matching.

mod condition;
mod engine;
mod rule;

pub use condition::{Condition, Equals, Predicate};
pub use engine::{Evaluation, RuleEngine};
pub use rule::{Combinator, Rule};
