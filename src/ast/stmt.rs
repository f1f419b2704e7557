use crate::interpreter::TypeTag;

use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(Vec<Stmt>),
    Break,
    Continue,
    Expression(Expr),
    For {
        init: Option<Box<Stmt>>,
        cond: Option<Expr>,
        incr: Option<Box<Stmt>>,
        body: Vec<Stmt>,
    },
    ForEach {
        name: String,
        iterable: Expr,
        body: Vec<Stmt>,
    },
    If(Expr, Box<Stmt>, Option<Box<Stmt>>),
    Print(Expr),
    Var {
        name: String,
        ty: TypeTag,
        private: bool,
        init: Option<Expr>,
    },
    While(Expr, Vec<Stmt>),
}

impl Stmt {
    /// A public `auto` variable declaration.
    pub fn var<S: Into<String>>(name: S, init: Expr) -> Self {
        Stmt::Var {
            name: name.into(),
            ty: TypeTag::Auto,
            private: false,
            init: Some(init),
        }
    }

    pub fn typed_var<S: Into<String>, T: Into<TypeTag>>(name: S, ty: T, private: bool, init: Option<Expr>) -> Self {
        Stmt::Var {
            name: name.into(),
            ty: ty.into(),
            private,
            init,
        }
    }

    pub fn expr(expr: Expr) -> Self {
        Stmt::Expression(expr)
    }

    pub fn if_then(cond: Expr, then_branch: Stmt) -> Self {
        Stmt::If(cond, Box::new(then_branch), None)
    }

    pub fn for_each<S: Into<String>>(name: S, iterable: Expr, body: Vec<Stmt>) -> Self {
        Stmt::ForEach {
            name: name.into(),
            iterable,
            body,
        }
    }

    pub fn for_loop(init: Option<Stmt>, cond: Option<Expr>, incr: Option<Stmt>, body: Vec<Stmt>) -> Self {
        Stmt::For {
            init: init.map(Box::new),
            cond,
            incr: incr.map(Box::new),
            body,
        }
    }
}

pub trait StmtVisitor<T> {
    fn visit_stmt(&mut self, stmt: &Stmt) -> T {
        match stmt {
            Stmt::Block(stmts) => self.visit_block(stmts),
            Stmt::Break => self.visit_break(),
            Stmt::Continue => self.visit_continue(),
            Stmt::Expression(expr) => self.visit_expr_stmt(expr),
            Stmt::For { init, cond, incr, body } => self.visit_for(init.as_deref(), cond.as_ref(), incr.as_deref(), body),
            Stmt::ForEach { name, iterable, body } => self.visit_for_each(name, iterable, body),
            Stmt::If(cond, then_branch, else_branch) => self.visit_if(cond, then_branch, else_branch.as_deref()),
            Stmt::Print(expr) => self.visit_print(expr),
            Stmt::Var { name, ty, private, init } => self.visit_var_def(name, ty, *private, init.as_ref()),
            Stmt::While(cond, body) => self.visit_while(cond, body),
        }
    }

    fn visit_block(&mut self, stmts: &[Stmt]) -> T;

    fn visit_break(&mut self) -> T;

    fn visit_continue(&mut self) -> T;

    fn visit_expr_stmt(&mut self, expr: &Expr) -> T;

    fn visit_for(&mut self, init: Option<&Stmt>, cond: Option<&Expr>, incr: Option<&Stmt>, body: &[Stmt]) -> T;

    fn visit_for_each(&mut self, name: &str, iterable: &Expr, body: &[Stmt]) -> T;

    fn visit_if(&mut self, cond: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) -> T;

    fn visit_print(&mut self, expr: &Expr) -> T;

    fn visit_var_def(&mut self, name: &str, ty: &TypeTag, private: bool, init: Option<&Expr>) -> T;

    fn visit_while(&mut self, cond: &Expr, body: &[Stmt]) -> T;
}
