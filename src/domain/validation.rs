use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Missing { field: &'static str },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    InvalidPhoneNumber { input: String },
    /// More than one rule was violated by the same request.
    Violations(Vec<ValidationError>),
}

impl ValidationError {
    /// Collapse collected violations into a single error, if any.
    pub(crate) fn from_violations(mut violations: Vec<ValidationError>) -> Option<Self> {
        match violations.len() {
            0 => None,
            1 => violations.pop(),
            _ => Some(Self::Violations(violations)),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{field} must not be null"),
            Self::TooLong { field, max, actual } => {
                write!(
                    f,
                    "{field} must not exceed {max} characters (got {actual})"
                )
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::Violations(violations) => {
                for (idx, violation) in violations.iter().enumerate() {
                    if idx > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{violation}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidationError {}
