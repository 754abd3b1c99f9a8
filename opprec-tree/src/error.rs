use opprec_types::OperatorDescriptor;

/// Errors that can occur while assembling a tree
///
/// Every variant is fatal to the expression being assembled; the driver is
/// expected to abort it and report a syntax error.
#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    #[error("Missing value in expression for {operator}; stack: [{}]", .stack.join(", "))]
    MissingOperand {
        operator: OperatorDescriptor,
        stack: Vec<String>,
    },

    #[error("Incomplete expression: {} values remain: [{}]", .stack.len(), .stack.join(", "))]
    IncompleteExpression { stack: Vec<String> },

    #[error("Empty expression: no value was pushed")]
    EmptyExpression,

    #[error("Invalid operator descriptor: {operator}")]
    InvalidDescriptor { operator: OperatorDescriptor },

    #[error("Unknown operator: {name}")]
    UnknownOperator { name: String },
}

pub type Result<T> = std::result::Result<T, AssembleError>;
