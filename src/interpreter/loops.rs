//! The three structured loop forms.
//!
//! Each loop drives an [`Evaluator`] and owns the `Break`/`Continue` signals
//! produced by its body: they never escape past the loop which ran the body.
//! Any error raised while evaluating the header or the body propagates
//! unchanged.

use crate::{errors, OryonError};

use super::{Environment, Evaluator, Flow};

/// How a single pass over a loop body ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Completed,
    Continued,
    Broken,
}

fn run_body<E: Evaluator>(evaluator: &mut E, body: &[E::Stmt]) -> Result<Pass, OryonError> {
    for stmt in body {
        match evaluator.execute(stmt)? {
            Flow::Normal(_) => {}
            Flow::Break => {
                tracing::debug!("loop consumed break");
                return Ok(Pass::Broken);
            }
            Flow::Continue => {
                tracing::debug!("loop consumed continue");
                return Ok(Pass::Continued);
            }
        }
    }

    Ok(Pass::Completed)
}

#[tracing::instrument(level = "trace", skip_all)]
pub fn while_loop<E: Evaluator>(evaluator: &mut E, condition: &E::Expr, body: &[E::Stmt]) -> Result<(), OryonError> {
    while evaluator.evaluate(condition)?.is_truthy() {
        if run_body(evaluator, body)? == Pass::Broken {
            break;
        }
    }

    Ok(())
}

/// Evaluates `iterable` once and runs `body` for each element it produces,
/// binding the element as `name` directly in `target`. No scope is created per
/// iteration, so the binding outlives the loop and holds the last element seen.
#[tracing::instrument(level = "trace", skip(evaluator, iterable, body, target))]
pub fn iterator_for_loop<E: Evaluator>(
    evaluator: &mut E,
    iterable: &E::Expr,
    name: &str,
    body: &[E::Stmt],
    target: &Environment,
) -> Result<(), OryonError> {
    let iterable = evaluator.evaluate(iterable)?;
    let items = iterable.iter().ok_or_else(|| {
        tracing::debug!(type_tag = %iterable.type_tag(), "refusing to iterate");
        errors::not_iterable(iterable.type_tag())
    })?;

    for item in items {
        target.define(name, item);

        if run_body(evaluator, body)? == Pass::Broken {
            break;
        }
    }

    Ok(())
}

/// Runs `init` once, then loops while `condition` (if any) is truthy. Both a
/// completed pass and a `continue` fall through to `increment`.
#[tracing::instrument(level = "trace", skip_all)]
pub fn c_style_for_loop<E: Evaluator>(
    evaluator: &mut E,
    init: Option<&E::Stmt>,
    condition: Option<&E::Expr>,
    increment: Option<&E::Stmt>,
    body: &[E::Stmt],
) -> Result<(), OryonError> {
    if let Some(init) = init {
        evaluator.execute_outside_body(init, "in a for loop initializer")?;
    }

    loop {
        if let Some(condition) = condition {
            if !evaluator.evaluate(condition)?.is_truthy() {
                break;
            }
        }

        if run_body(evaluator, body)? == Pass::Broken {
            break;
        }

        if let Some(increment) = increment {
            evaluator.execute_outside_body(increment, "in a for loop increment")?;
        }
    }

    Ok(())
}
