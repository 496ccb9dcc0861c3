/// Error types for the pricing core and the service around it.
///
/// Pricing failures are always caller input errors: nothing is retried and a
/// failed calculation never affects the next one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    /// A field could not be read as a number. Reported once per request;
    /// `field` is kept for logging only.
    #[error("Please enter valid numbers.")]
    InvalidInput { field: &'static str },

    /// Numerically valid input for which the model is undefined.
    #[error("domain error: {0}")]
    Domain(String),
}

impl PricingError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::Domain(_) => "domain",
        }
    }
}

pub type PricingResult<T> = Result<T, PricingError>;

/// Process-level failures (startup, bind, serve).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_is_generic() {
        let err = PricingError::InvalidInput { field: "strike" };
        assert_eq!(err.to_string(), "Please enter valid numbers.");
        assert_eq!(err.kind(), "invalid_input");
    }

    #[test]
    fn test_domain_message_carries_reason() {
        let err = PricingError::Domain("volatility must be positive".into());
        assert!(err.to_string().contains("volatility must be positive"));
        assert_eq!(err.kind(), "domain");
    }

    #[test]
    fn test_app_error_wraps_pricing() {
        let err: AppError = PricingError::Domain("maturity must be positive".into()).into();
        assert!(matches!(err, AppError::Pricing(PricingError::Domain(_))));
        assert!(err.to_string().contains("maturity"));
    }

    #[test]
    fn test_errors_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PricingError>();
        assert_send_sync::<AppError>();
    }
}
