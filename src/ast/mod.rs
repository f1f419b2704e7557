//! Syntax tree consumed by the interpreter. Programs are assembled directly
//! from these nodes; the builder functions keep that readable.

mod expr;
pub mod printer;
mod stmt;
mod value;

pub use expr::{BinaryOp, Expr, ExprVisitor, LogicalOp, UnaryOp};
pub use stmt::{Stmt, StmtVisitor};
pub use value::Literal;
