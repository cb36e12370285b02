/// Cross-fade transition synthesis.
pub mod transitions;
