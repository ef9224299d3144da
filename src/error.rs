use thiserror::Error;

/// Errors in the operator catalog itself. These are configuration mistakes,
/// fatal at registry load time: a registry is never constructed from a broken
/// catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Operator signature '{signature}' is declared more than once")]
    DuplicateSignature { signature: String },

    #[error("Operator '{signature}' declares no child field types (at least one is required)")]
    EmptyFieldList { signature: String },

    #[error("Operator '{signature}' has inverted cardinality bounds: min {min} > max {max}")]
    InvalidCardinality {
        signature: String,
        min: usize,
        max: usize,
    },
}

/// Errors that can occur while applying a user edit to a rule tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Operator signature '{signature}' is not present in the registry")]
    UnknownOperator { signature: String },
}

/// Errors that can occur while parsing a JSON-Logic expression into a rule tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed JSON-Logic expression: {reason}")]
    MalformedExpression { reason: String },
}

impl ParseError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ParseError::MalformedExpression {
            reason: reason.into(),
        }
    }
}
