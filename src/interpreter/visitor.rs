use std::{cmp::Ordering, io::Write};

use crate::{ast::{BinaryOp, Expr, ExprVisitor, Literal, LogicalOp, Stmt, StmtVisitor, UnaryOp}, errors, OryonError};

use super::{loops, Flow, Interpreter, TypeTag, Value};

fn arithmetic(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, OryonError> {
    let invalid = || errors::invalid_operands(op.symbol(), left.type_tag(), right.type_tag());

    match (left, right) {
        (Value::Int(a), Value::Int(b)) => {
            let (a, b) = (*a, *b);
            match op {
                BinaryOp::Add => Ok(Value::Int(a.wrapping_add(b))),
                BinaryOp::Sub => Ok(Value::Int(a.wrapping_sub(b))),
                BinaryOp::Mul => Ok(Value::Int(a.wrapping_mul(b))),
                BinaryOp::Div if b != 0 => Ok(Value::Int(a.wrapping_div(b))),
                BinaryOp::Rem if b != 0 => Ok(Value::Int(a.wrapping_rem(b))),
                _ => Err(invalid()),
            }
        },
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            let (a, b) = (as_float(left), as_float(right));
            match op {
                BinaryOp::Add => Ok(Value::Float(a + b)),
                BinaryOp::Sub => Ok(Value::Float(a - b)),
                BinaryOp::Mul => Ok(Value::Float(a * b)),
                BinaryOp::Div if b != 0.0 => Ok(Value::Float(a / b)),
                BinaryOp::Rem if b != 0.0 => Ok(Value::Float(a % b)),
                _ => Err(invalid()),
            }
        },
        (Value::Str(a), Value::Str(b)) if op == BinaryOp::Add => Ok(Value::Str(format!("{}{}", a, b))),
        (Value::List(a), Value::List(b)) if op == BinaryOp::Add => {
            let mut items = a.borrow().clone();
            items.extend(b.borrow().iter().cloned());
            Ok(Value::list(items))
        },
        _ => Err(invalid()),
    }
}

fn as_float(value: &Value) -> f64 {
    match value {
        Value::Int(n) => *n as f64,
        Value::Float(n) => *n,
        _ => f64::NAN,
    }
}

fn compare(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, OryonError> {
    let ordering = left.partial_cmp(right).ok_or_else(|| errors::invalid_operands(op.symbol(), left.type_tag(), right.type_tag()))?;

    Ok(Value::Bool(match op {
        BinaryOp::Less => ordering == Ordering::Less,
        BinaryOp::LessEqual => ordering != Ordering::Greater,
        BinaryOp::Greater => ordering == Ordering::Greater,
        _ => ordering != Ordering::Less,
    }))
}

impl ExprVisitor<Result<Value, OryonError>> for Interpreter {
    fn visit_assign(&mut self, ident: &str, value: &Expr) -> Result<Value, OryonError> {
        let value = self.visit_expr(value)?;
        self.env.assign(ident, value.clone())?;
        Ok(value)
    }

    fn visit_binary(&mut self, left: &Expr, op: BinaryOp, right: &Expr) -> Result<Value, OryonError> {
        let left = self.visit_expr(left)?;
        let right = self.visit_expr(right)?;

        match op {
            BinaryOp::Equal => Ok(Value::Bool(left == right)),
            BinaryOp::NotEqual => Ok(Value::Bool(left != right)),
            BinaryOp::Less | BinaryOp::LessEqual | BinaryOp::Greater | BinaryOp::GreaterEqual => compare(op, &left, &right),
            _ => arithmetic(op, &left, &right),
        }
    }

    fn visit_get(&mut self, obj: &Expr, field: &str) -> Result<Value, OryonError> {
        match self.visit_expr(obj)? {
            Value::Object(object) => object.fields().get(field, Some(&self.env)),
            other => Err(errors::no_such_field(field, other.type_tag())),
        }
    }

    fn visit_grouping(&mut self, expr: &Expr) -> Result<Value, OryonError> {
        self.visit_expr(expr)
    }

    fn visit_list(&mut self, items: &[Expr]) -> Result<Value, OryonError> {
        let items = items.iter().map(|item| self.visit_expr(item)).collect::<Result<Vec<_>, _>>()?;
        Ok(Value::list(items))
    }

    fn visit_literal(&mut self, value: &Literal) -> Result<Value, OryonError> {
        Ok(value.into())
    }

    fn visit_logical(&mut self, left: &Expr, op: LogicalOp, right: &Expr) -> Result<Value, OryonError> {
        let left = self.visit_expr(left)?;

        match op {
            LogicalOp::And if left.is_truthy() => self.visit_expr(right),
            LogicalOp::Or if !left.is_truthy() => self.visit_expr(right),
            _ => Ok(left)
        }
    }

    fn visit_map(&mut self, entries: &[(Expr, Expr)]) -> Result<Value, OryonError> {
        let mut evaluated: Vec<(Value, Value)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let key = self.visit_expr(key)?;
            let value = self.visit_expr(value)?;
            match evaluated.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => evaluated.push((key, value)),
            }
        }

        Ok(Value::map(evaluated))
    }

    fn visit_this(&mut self) -> Result<Value, OryonError> {
        self.env.get("this", Some(&self.env))
    }

    fn visit_tuple(&mut self, items: &[Expr]) -> Result<Value, OryonError> {
        let items = items.iter().map(|item| self.visit_expr(item)).collect::<Result<Vec<_>, _>>()?;
        Ok(Value::tuple(items))
    }

    fn visit_unary(&mut self, op: UnaryOp, expr: &Expr) -> Result<Value, OryonError> {
        let right = self.visit_expr(expr)?;

        match (op, right) {
            (UnaryOp::Negate, Value::Int(n)) => Ok(Value::Int(n.wrapping_neg())),
            (UnaryOp::Negate, Value::Float(n)) => Ok(Value::Float(-n)),
            (UnaryOp::Negate, other) => Err(OryonError::InvalidOperand { op: "-", operand: other.type_tag() }),
            (UnaryOp::Not, value) => Ok(Value::Bool(!value.is_truthy())),
        }
    }

    fn visit_var_ref(&mut self, name: &str) -> Result<Value, OryonError> {
        self.env.get(name, Some(&self.env))
    }
}

impl StmtVisitor<Result<Flow, OryonError>> for Interpreter {
    fn visit_block(&mut self, stmts: &[Stmt]) -> Result<Flow, OryonError> {
        let child = self.env.new_child();
        self.execute_block(stmts, child)
    }

    fn visit_break(&mut self) -> Result<Flow, OryonError> {
        Ok(Flow::Break)
    }

    fn visit_continue(&mut self) -> Result<Flow, OryonError> {
        Ok(Flow::Continue)
    }

    fn visit_expr_stmt(&mut self, expr: &Expr) -> Result<Flow, OryonError> {
        self.visit_expr(expr).map(Flow::Normal)
    }

    fn visit_for(&mut self, init: Option<&Stmt>, cond: Option<&Expr>, incr: Option<&Stmt>, body: &[Stmt]) -> Result<Flow, OryonError> {
        // The initializer's declarations are scoped to the loop.
        let scope = self.env.new_child();
        let previous = std::mem::replace(&mut self.env, scope);

        let result = loops::c_style_for_loop(self, init, cond, incr, body);

        self.env = previous;
        result.map(|_| Flow::default())
    }

    fn visit_for_each(&mut self, name: &str, iterable: &Expr, body: &[Stmt]) -> Result<Flow, OryonError> {
        let target = self.env.clone();
        loops::iterator_for_loop(self, iterable, name, body, &target)?;
        Ok(Flow::default())
    }

    fn visit_if(&mut self, cond: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) -> Result<Flow, OryonError> {
        let cond = self.visit_expr(cond)?;

        if cond.is_truthy() {
            self.visit_stmt(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.visit_stmt(else_branch)
        } else {
            Ok(Flow::default())
        }
    }

    fn visit_print(&mut self, expr: &Expr) -> Result<Flow, OryonError> {
        let value = self.visit_expr(expr)?;
        writeln!(self.output, "{}", value)?;
        Ok(Flow::default())
    }

    fn visit_var_def(&mut self, name: &str, ty: &TypeTag, private: bool, init: Option<&Expr>) -> Result<Flow, OryonError> {
        let value = match init {
            Some(init) => self.visit_expr(init)?,
            None => Value::Null,
        };

        let actual = value.type_tag();
        if value != Value::Null && !ty.accepts(&actual) {
            return Err(errors::type_mismatch(name, ty.clone(), actual));
        }

        self.env.define_with(name, value, ty.clone(), private);
        Ok(Flow::default())
    }

    fn visit_while(&mut self, cond: &Expr, body: &[Stmt]) -> Result<Flow, OryonError> {
        loops::while_loop(self, cond, body)?;
        Ok(Flow::default())
    }
}
