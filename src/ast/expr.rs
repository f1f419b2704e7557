use std::fmt::Display;

use super::Literal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
    Not,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for LogicalOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LogicalOp::And => write!(f, "and"),
            LogicalOp::Or => write!(f, "or"),
        }
    }
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            UnaryOp::Negate => write!(f, "-"),
            UnaryOp::Not => write!(f, "!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Assign(String, Box<Expr>),
    Binary(Box<Expr>, BinaryOp, Box<Expr>),
    Get(Box<Expr>, String),
    Grouping(Box<Expr>),
    List(Vec<Expr>),
    Literal(Literal),
    Logical(Box<Expr>, LogicalOp, Box<Expr>),
    Map(Vec<(Expr, Expr)>),
    This,
    Tuple(Vec<Expr>),
    Unary(UnaryOp, Box<Expr>),
    Var(String),
}

impl Expr {
    pub fn lit<L: Into<Literal>>(value: L) -> Self {
        Expr::Literal(value.into())
    }

    pub fn var<S: Into<String>>(name: S) -> Self {
        Expr::Var(name.into())
    }

    pub fn assign<S: Into<String>>(name: S, value: Expr) -> Self {
        Expr::Assign(name.into(), Box::new(value))
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary(Box::new(left), op, Box::new(right))
    }

    pub fn logical(left: Expr, op: LogicalOp, right: Expr) -> Self {
        Expr::Logical(Box::new(left), op, Box::new(right))
    }

    pub fn unary(op: UnaryOp, expr: Expr) -> Self {
        Expr::Unary(op, Box::new(expr))
    }

    pub fn get<S: Into<String>>(object: Expr, field: S) -> Self {
        Expr::Get(Box::new(object), field.into())
    }
}

pub trait ExprVisitor<T> {
    fn visit_expr(&mut self, expr: &Expr) -> T {
        match expr {
            Expr::Assign(ident, value) => {
                self.visit_assign(ident, value)
            },
            Expr::Binary(left, op, right) => {
                self.visit_binary(left, *op, right)
            },
            Expr::Get(obj, field) => {
                self.visit_get(obj, field)
            },
            Expr::Grouping(expr) => {
                self.visit_grouping(expr)
            },
            Expr::List(items) => {
                self.visit_list(items)
            },
            Expr::Literal(value) => {
                self.visit_literal(value)
            },
            Expr::Logical(left, op, right) => {
                self.visit_logical(left, *op, right)
            },
            Expr::Map(entries) => {
                self.visit_map(entries)
            },
            Expr::This => {
                self.visit_this()
            },
            Expr::Tuple(items) => {
                self.visit_tuple(items)
            },
            Expr::Unary(op, expr) => {
                self.visit_unary(*op, expr)
            },
            Expr::Var(name) => {
                self.visit_var_ref(name)
            }
        }
    }

    fn visit_assign(&mut self, ident: &str, value: &Expr) -> T;

    fn visit_binary(&mut self, left: &Expr, op: BinaryOp, right: &Expr) -> T;

    fn visit_get(&mut self, obj: &Expr, field: &str) -> T;

    fn visit_grouping(&mut self, expr: &Expr) -> T;

    fn visit_list(&mut self, items: &[Expr]) -> T;

    fn visit_literal(&mut self, value: &Literal) -> T;

    fn visit_logical(&mut self, left: &Expr, op: LogicalOp, right: &Expr) -> T;

    fn visit_map(&mut self, entries: &[(Expr, Expr)]) -> T;

    fn visit_this(&mut self) -> T;

    fn visit_tuple(&mut self, items: &[Expr]) -> T;

    fn visit_unary(&mut self, op: UnaryOp, expr: &Expr) -> T;

    fn visit_var_ref(&mut self, name: &str) -> T;
}
