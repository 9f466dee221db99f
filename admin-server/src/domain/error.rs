//! Domain error types.
//!
//! These errors represent editing mistakes and incomplete drafts in the
//! domain layer. They are distinct from API/IO errors.

/// Domain-level errors for cycle editing and payload assembly.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Leg index is out of bounds for the cycle
    #[error("leg index {0} is out of bounds")]
    LegIndex(usize),

    /// A cycle must have at least one leg to be submitted
    #[error("flight cycle has no legs")]
    EmptyCycle,

    /// A required field is still unset
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            DomainError::LegIndex(3).to_string(),
            "leg index 3 is out of bounds"
        );
        assert_eq!(DomainError::EmptyCycle.to_string(), "flight cycle has no legs");
        assert_eq!(
            DomainError::MissingField("start_date").to_string(),
            "missing required field: start_date"
        );
    }
}
