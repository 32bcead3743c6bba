use thiserror::Error;

/// Errors raised at the shell boundary. The core operations themselves are
/// total: unknown categorical values and unmatched filter keys degrade
/// silently instead of surfacing here.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_message_names_the_input() {
        let err = DashboardError::UnknownRole("janitor".into());
        assert_eq!(err.to_string(), "Unknown role: janitor");
    }

    #[test]
    fn serialization_error_converts_from_serde() {
        let serde_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: DashboardError = serde_err.into();
        assert!(matches!(err, DashboardError::Serialization(_)));
    }
}
