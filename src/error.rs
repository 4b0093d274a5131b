pub type DeckforgeResult<T> = Result<T, DeckforgeError>;

#[derive(thiserror::Error, Debug)]
pub enum DeckforgeError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("registry error: {0}")]
    Registry(String),

    #[error("evaluation error: {0}")]
    Evaluation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeckforgeError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn registry(msg: impl Into<String>) -> Self {
        Self::Registry(msg.into())
    }

    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            DeckforgeError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            DeckforgeError::registry("x")
                .to_string()
                .contains("registry error:")
        );
        assert!(
            DeckforgeError::evaluation("x")
                .to_string()
                .contains("evaluation error:")
        );
        assert!(
            DeckforgeError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = DeckforgeError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
