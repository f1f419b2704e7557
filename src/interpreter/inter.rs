use crate::{analysis::analyze, ast::{printer::AstPrinter, Expr, ExprVisitor, Stmt, StmtVisitor}, errors, OryonError};

use super::{env::Environment, Evaluator, Flow, Value};

pub struct Interpreter {
    pub (super) env: Environment,
    pub (super) globals: Environment,
    pub output: Box<dyn std::io::Write>,
}

impl Interpreter {
    /// Analyzes and then runs a program, stopping at the first runtime error.
    #[tracing::instrument(level = "debug", skip_all, fields(stmts = stmts.len()))]
    pub fn interpret(&mut self, stmts: &[Stmt]) -> Vec<OryonError> {
        let mut errs = analyze(stmts);
        if errs.is_empty() {
            for stmt in stmts.iter() {
                tracing::trace!(stmt = %AstPrinter{}.visit_stmt(stmt), "executing");
                match self.visit_stmt(stmt) {
                    Ok(Flow::Normal(_)) => (),
                    Ok(flow) => {
                        if let Some(signal) = flow.signal() {
                            errs.push(errors::misplaced(signal, "outside of a loop"));
                        }
                        break
                    },
                    Err(err) => {
                        tracing::debug!(error = %err, "program stopped");
                        errs.push(err);
                        break
                    },
                }
            }
        }

        errs
    }

    pub fn with_output(self, output: Box<dyn std::io::Write>) -> Self {
        Self {
            output,
            ..self
        }
    }

    /// Runs against a caller supplied root scope instead of a fresh one.
    pub fn with_globals(self, globals: Environment) -> Self {
        Self {
            env: globals.clone(),
            globals,
            ..self
        }
    }

    pub fn into_output(self) -> Box<dyn std::io::Write> {
        self.output
    }

    pub fn globals(&self) -> &Environment {
        &self.globals
    }

    /// The scope statements are currently executing in.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn bind_this(&mut self, this: Value) -> Result<(), OryonError> {
        self.env.bind_this(Some(this))
    }

    /// Executes `stmts` in `env`, restoring the previous scope afterwards even
    /// if a statement fails. The first `Break` or `Continue` ends the block and
    /// is handed back to the caller.
    pub fn execute_block(&mut self, stmts: &[Stmt], env: Environment) -> Result<Flow, OryonError> {
        let previous = std::mem::replace(&mut self.env, env);

        let mut result = Ok(Flow::default());
        for stmt in stmts {
            match self.visit_stmt(stmt) {
                Ok(Flow::Normal(_)) => {},
                other => {
                    result = other;
                    break;
                }
            }
        }

        self.env = previous;
        result
    }
}

impl Evaluator for Interpreter {
    type Expr = Expr;
    type Stmt = Stmt;

    fn evaluate(&mut self, expr: &Expr) -> Result<Value, OryonError> {
        self.visit_expr(expr)
    }

    fn execute(&mut self, stmt: &Stmt) -> Result<Flow, OryonError> {
        self.visit_stmt(stmt)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        let globals = Environment::new();

        Self {
            env: globals.clone(),
            globals,
            output: Box::new(std::io::stdout()),
        }
    }
}
