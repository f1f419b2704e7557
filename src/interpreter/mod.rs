mod class;
mod env;
mod flow;
mod inter;
pub mod loops;
mod types;
mod value;
mod visitor;

pub use class::Object;
pub use env::{is_descendant, Binding, Environment};
pub use flow::{Evaluator, Flow};
pub use inter::Interpreter;
pub use loops::{c_style_for_loop, iterator_for_loop, while_loop};
pub use types::TypeTag;
pub use value::Value;

use crate::{ast::Stmt, OryonError};

/// Runs a program against a fresh set of globals, printing to stdout and
/// returning the first error encountered.
pub fn interpret(stmts: &[Stmt]) -> Result<(), OryonError> {
    let mut interpreter = Interpreter::default();
    match interpreter.interpret(stmts).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
