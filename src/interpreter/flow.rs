use crate::{errors::{self, Signal}, OryonError};

use super::Value;

/// The outcome of executing one statement.
///
/// `Break` and `Continue` are only meaningful to the nearest enclosing loop,
/// which always consumes them. Errors travel separately in the `Err` arm of
/// the surrounding `Result` and are never intercepted by a loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Normal(Value),
    Break,
    Continue,
}

impl Flow {
    pub fn signal(&self) -> Option<Signal> {
        match self {
            Flow::Normal(_) => None,
            Flow::Break => Some(Signal::Break),
            Flow::Continue => Some(Signal::Continue),
        }
    }
}

impl Default for Flow {
    fn default() -> Self {
        Flow::Normal(Value::Null)
    }
}

/// The host side of the loop machinery: something which can evaluate
/// expressions into values and execute statements into a [`Flow`].
pub trait Evaluator {
    type Expr;
    type Stmt;

    fn evaluate(&mut self, expr: &Self::Expr) -> Result<Value, OryonError>;

    fn execute(&mut self, stmt: &Self::Stmt) -> Result<Flow, OryonError>;

    /// Executes a statement which is not part of a loop body, such as a
    /// `for` initializer or increment, where a control-flow signal has no
    /// loop to bind to.
    fn execute_outside_body(&mut self, stmt: &Self::Stmt, context: &'static str) -> Result<(), OryonError> {
        match self.execute(stmt)?.signal() {
            Some(signal) => Err(errors::misplaced(signal, context)),
            None => Ok(()),
        }
    }
}
