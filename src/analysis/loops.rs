use crate::{ast::{Expr, Stmt, StmtVisitor}, errors::{self, Signal}, interpreter::TypeTag, OryonError};

use super::Analyzer;

#[derive(Debug, Default)]
pub (super) struct LoopAnalyzer {
    pub (super) depth: usize,
}

impl LoopAnalyzer {
    fn signal(&self, signal: Signal) -> Vec<OryonError> {
        if self.depth == 0 {
            vec![errors::misplaced(signal, "outside of a loop")]
        } else {
            Vec::new()
        }
    }

    fn loop_body(&mut self, body: &[Stmt]) -> Vec<OryonError> {
        self.depth += 1;
        let errs = body.iter().flat_map(|stmt| self.visit_stmt(stmt)).collect();
        self.depth -= 1;
        errs
    }

    /// Loop headers run outside of the loop body, so signals there do not
    /// belong to the loop being declared.
    fn header(&mut self, stmt: Option<&Stmt>) -> Vec<OryonError> {
        let depth = std::mem::take(&mut self.depth);
        let errs = stmt.map(|stmt| self.visit_stmt(stmt)).unwrap_or_default();
        self.depth = depth;
        errs
    }
}

impl Analyzer for LoopAnalyzer {}

impl StmtVisitor<Vec<OryonError>> for LoopAnalyzer {
    fn visit_block(&mut self, stmts: &[Stmt]) -> Vec<OryonError> {
        stmts.iter().flat_map(|stmt| self.visit_stmt(stmt)).collect()
    }

    fn visit_break(&mut self) -> Vec<OryonError> {
        self.signal(Signal::Break)
    }

    fn visit_continue(&mut self) -> Vec<OryonError> {
        self.signal(Signal::Continue)
    }

    fn visit_expr_stmt(&mut self, _expr: &Expr) -> Vec<OryonError> {
        Vec::new()
    }

    fn visit_for(&mut self, init: Option<&Stmt>, _cond: Option<&Expr>, incr: Option<&Stmt>, body: &[Stmt]) -> Vec<OryonError> {
        vec![
            self.header(init),
            self.header(incr),
            self.loop_body(body),
        ].into_iter().flatten().collect()
    }

    fn visit_for_each(&mut self, _name: &str, _iterable: &Expr, body: &[Stmt]) -> Vec<OryonError> {
        self.loop_body(body)
    }

    fn visit_if(&mut self, _cond: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) -> Vec<OryonError> {
        let mut errs = self.visit_stmt(then_branch);
        if let Some(else_branch) = else_branch {
            errs.append(&mut self.visit_stmt(else_branch));
        }

        errs
    }

    fn visit_print(&mut self, _expr: &Expr) -> Vec<OryonError> {
        Vec::new()
    }

    fn visit_var_def(&mut self, _name: &str, _ty: &TypeTag, _private: bool, _init: Option<&Expr>) -> Vec<OryonError> {
        Vec::new()
    }

    fn visit_while(&mut self, _cond: &Expr, body: &[Stmt]) -> Vec<OryonError> {
        self.loop_body(body)
    }
}
