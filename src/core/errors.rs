use thiserror::Error;

use crate::interpreter::TypeTag;

#[derive(Debug, Error)]
pub enum OryonError {
    #[error("AccessError: '{name}' is private")]
    Access { name: String },

    #[error("TypeError: cannot assign value of type '{actual}' to variable '{name}' of type '{expected}'")]
    Type {
        name: String,
        expected: TypeTag,
        actual: TypeTag,
    },

    #[error("Variable '{name}' not defined")]
    UndefinedVariable { name: String },

    #[error("TypeError: '{type_tag}' object is not iterable")]
    NotIterable { type_tag: TypeTag },

    #[error("'this' cannot be bound to an absent value")]
    InvalidBindingTarget,

    #[error("'{signal}' is not valid {context}")]
    MisplacedSignal { signal: Signal, context: &'static str },

    #[error("Invalid operands to binary operator {op}: '{left}' and '{right}'")]
    InvalidOperands {
        op: &'static str,
        left: TypeTag,
        right: TypeTag,
    },

    #[error("Invalid operand to unary operator {op}: '{operand}'")]
    InvalidOperand { op: &'static str, operand: TypeTag },

    #[error("'{type_tag}' value has no field '{field}'")]
    NoSuchField { field: String, type_tag: TypeTag },

    #[error("We were unable to write the program's output")]
    Io(#[from] std::io::Error),
}

/// The two loop-scoped control-flow signals, used when reporting one that
/// surfaced somewhere it does not belong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Break,
    Continue,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Signal::Break => write!(f, "break"),
            Signal::Continue => write!(f, "continue"),
        }
    }
}

impl OryonError {
    pub fn advice(&self) -> &'static str {
        match self {
            OryonError::Access { .. } => "Only code running inside the scope that declared a private variable (or one of its nested scopes) may read it.",
            OryonError::Type { .. } => "Assign a value of the declared type, or declare the variable as `auto` to disable type checking.",
            OryonError::UndefinedVariable { .. } => "Define the variable before you attempt to reference or assign it.",
            OryonError::NotIterable { .. } => "Make sure you are looping over a list, tuple, map or string.",
            OryonError::InvalidBindingTarget => "This is a bug in the host interpreter, please report it with example code.",
            OryonError::MisplacedSignal { .. } => "Only use `break` and `continue` inside the body of a loop.",
            OryonError::InvalidOperands { .. } => "Provide operands of compatible types on both sides of the operator.",
            OryonError::InvalidOperand { .. } => "Provide a number to the negation operator, or remove the minus sign.",
            OryonError::NoSuchField { .. } => "Only objects have fields; check the value you are reading from.",
            OryonError::Io(_) => "Check that the output stream you configured is still open and writable.",
        }
    }
}

pub fn access<S: Into<String>>(name: S) -> OryonError {
    OryonError::Access { name: name.into() }
}

pub fn type_mismatch<S: Into<String>>(name: S, expected: TypeTag, actual: TypeTag) -> OryonError {
    OryonError::Type {
        name: name.into(),
        expected,
        actual,
    }
}

pub fn undefined<S: Into<String>>(name: S) -> OryonError {
    OryonError::UndefinedVariable { name: name.into() }
}

pub fn not_iterable(type_tag: TypeTag) -> OryonError {
    OryonError::NotIterable { type_tag }
}

pub fn misplaced(signal: Signal, context: &'static str) -> OryonError {
    OryonError::MisplacedSignal { signal, context }
}

pub fn no_such_field<S: Into<String>>(field: S, type_tag: TypeTag) -> OryonError {
    OryonError::NoSuchField { field: field.into(), type_tag }
}

pub fn invalid_operands(op: &'static str, left: TypeTag, right: TypeTag) -> OryonError {
    OryonError::InvalidOperands { op, left, right }
}
