use thiserror::Error;

use crate::operations::PreconditionFailure;

#[derive(Debug, Error, PartialEq)]
pub enum GenericError {
    #[error(transparent)]
    Precondition(#[from] PreconditionFailure),
    #[error("ParseError: {0}")]
    ParseError(String),
    #[error("IoError: {0}")]
    IoError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_displays_user_message() {
        let e = GenericError::from(PreconditionFailure::NoResults);
        assert_eq!(e.to_string(), "Please train models first.");
    }

    #[test]
    fn test_parse_error_display() {
        let e = GenericError::ParseError("expected value at line 1".to_string());
        assert_eq!(e.to_string(), "ParseError: expected value at line 1");
    }
}
