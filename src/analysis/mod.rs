use crate::{ast::{Stmt, StmtVisitor}, OryonError};

mod loops;

pub trait Analyzer: StmtVisitor<Vec<OryonError>> {}

pub fn analyze(stmts: &[Stmt]) -> Vec<OryonError> {
    let mut errs = Vec::new();
    let mut analyzers: Vec<Box<dyn Analyzer>> = vec![
        // Static analysis which ensures that `break` and `continue` only appear within a loop body.
        Box::new(loops::LoopAnalyzer::default()),
    ];

    for stmt in stmts {
        for analyzer in analyzers.iter_mut() {
            errs.append(&mut analyzer.visit_stmt(stmt));
        }
    }

    errs
}
