use crate::interpreter::TypeTag;

use super::{BinaryOp, Expr, ExprVisitor, Literal, LogicalOp, Stmt, StmtVisitor, UnaryOp};

/// Renders a tree as an s-expression, which is handy in logs and test failures.
pub struct AstPrinter{}

impl AstPrinter {
    fn list(&mut self, head: &str, items: &[Expr]) -> String {
        let mut s = format!("({}", head);
        for item in items {
            s.push(' ');
            s.push_str(&self.visit_expr(item));
        }
        s.push(')');
        s
    }
}

impl ExprVisitor<String> for AstPrinter {
    fn visit_assign(&mut self, ident: &str, value: &Expr) -> String {
        format!("(= {} {})", ident, self.visit_expr(value))
    }

    fn visit_binary(&mut self, left: &Expr, op: BinaryOp, right: &Expr) -> String {
        format!("({} {} {})", op, self.visit_expr(left), self.visit_expr(right))
    }

    fn visit_get(&mut self, obj: &Expr, field: &str) -> String {
        format!("{}.{}", self.visit_expr(obj), field)
    }

    fn visit_grouping(&mut self, expr: &Expr) -> String {
        format!("(group {})", self.visit_expr(expr))
    }

    fn visit_list(&mut self, items: &[Expr]) -> String {
        self.list("list", items)
    }

    fn visit_literal(&mut self, value: &Literal) -> String {
        value.to_string()
    }

    fn visit_logical(&mut self, left: &Expr, op: LogicalOp, right: &Expr) -> String {
        format!("({} {} {})", op, self.visit_expr(left), self.visit_expr(right))
    }

    fn visit_map(&mut self, entries: &[(Expr, Expr)]) -> String {
        let mut s = "(map".to_string();
        for (key, value) in entries {
            s.push_str(&format!(" ({} {})", self.visit_expr(key), self.visit_expr(value)));
        }
        s.push(')');
        s
    }

    fn visit_this(&mut self) -> String {
        "this".to_string()
    }

    fn visit_tuple(&mut self, items: &[Expr]) -> String {
        self.list("tuple", items)
    }

    fn visit_unary(&mut self, op: UnaryOp, expr: &Expr) -> String {
        format!("({} {})", op, self.visit_expr(expr))
    }

    fn visit_var_ref(&mut self, name: &str) -> String {
        name.to_string()
    }
}

impl StmtVisitor<String> for AstPrinter {
    fn visit_block(&mut self, stmts: &[Stmt]) -> String {
        let mut result = String::new();
        result.push_str("(block");
        for stmt in stmts {
            result.push(' ');
            result.push_str(&self.visit_stmt(stmt));
        }
        result.push(')');
        result
    }

    fn visit_break(&mut self) -> String {
        "break".to_string()
    }

    fn visit_continue(&mut self) -> String {
        "continue".to_string()
    }

    fn visit_expr_stmt(&mut self, expr: &Expr) -> String {
        format!("({})", self.visit_expr(expr))
    }

    fn visit_for(&mut self, init: Option<&Stmt>, cond: Option<&Expr>, incr: Option<&Stmt>, body: &[Stmt]) -> String {
        format!(
            "(for {} {} {} {})",
            init.map(|s| self.visit_stmt(s)).unwrap_or_else(|| "_".to_string()),
            cond.map(|e| self.visit_expr(e)).unwrap_or_else(|| "_".to_string()),
            incr.map(|s| self.visit_stmt(s)).unwrap_or_else(|| "_".to_string()),
            self.visit_block(body),
        )
    }

    fn visit_for_each(&mut self, name: &str, iterable: &Expr, body: &[Stmt]) -> String {
        format!("(foreach {} {} {})", name, self.visit_expr(iterable), self.visit_block(body))
    }

    fn visit_if(&mut self, cond: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) -> String {
        let mut result = String::new();
        result.push_str("(if ");
        result.push_str(&self.visit_expr(cond));
        result.push(' ');
        result.push_str(&self.visit_stmt(then_branch));
        if let Some(else_branch) = else_branch {
            result.push(' ');
            result.push_str(&self.visit_stmt(else_branch));
        }
        result.push(')');
        result
    }

    fn visit_print(&mut self, expr: &Expr) -> String {
        format!("(print {})", self.visit_expr(expr))
    }

    fn visit_var_def(&mut self, name: &str, ty: &TypeTag, private: bool, init: Option<&Expr>) -> String {
        let mut result = String::new();
        result.push_str("(var ");
        if private {
            result.push_str("private ");
        }
        result.push_str(&format!("{}: {}", name, ty));
        if let Some(init) = init {
            result.push(' ');
            result.push_str(&self.visit_expr(init));
        }
        result.push(')');
        result
    }

    fn visit_while(&mut self, cond: &Expr, body: &[Stmt]) -> String {
        format!("(while {} {})", self.visit_expr(cond), self.visit_block(body))
    }
}
