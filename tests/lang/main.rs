use std::rc::Rc;

use oryon::{
    ast::{BinaryOp, Expr, LogicalOp, Stmt},
    errors::Signal,
    interpreter::{Environment, Interpreter, Object, TypeTag, Value},
    CaptureOutput, OryonError,
};
use pretty_assertions::assert_eq;

fn run_with(interpreter: Interpreter, stmts: &[Stmt]) -> (Vec<String>, Vec<OryonError>) {
    let output = CaptureOutput::new();
    let mut interpreter = interpreter.with_output(Box::new(output.clone()));
    let errors = interpreter.interpret(stmts);
    (output.lines(), errors)
}

fn run(stmts: &[Stmt]) -> (Vec<String>, Vec<OryonError>) {
    run_with(Interpreter::default(), stmts)
}

fn run_ok(stmts: &[Stmt]) -> Vec<String> {
    let (output, errors) = run(stmts);
    assert!(errors.is_empty(), "Did not expect an error, got {:?}", errors);
    output
}

fn print(expr: Expr) -> Stmt {
    Stmt::Print(expr)
}

fn add_assign(name: &str, amount: i64) -> Stmt {
    Stmt::expr(Expr::assign(name, Expr::binary(Expr::var(name), BinaryOp::Add, Expr::lit(amount))))
}

fn var_is(name: &str, value: i64) -> Expr {
    Expr::binary(Expr::var(name), BinaryOp::Equal, Expr::lit(value))
}

fn var_below(name: &str, limit: i64) -> Expr {
    Expr::binary(Expr::var(name), BinaryOp::Less, Expr::lit(limit))
}

fn ints(items: &[i64]) -> Expr {
    Expr::List(items.iter().map(|n| Expr::lit(*n)).collect())
}

#[test]
fn assignment_from_child_scope_updates_root() {
    let output = run_ok(&[
        Stmt::var("x", Expr::lit(1)),
        Stmt::Block(vec![
            print(Expr::var("x")),
            Stmt::expr(Expr::assign("x", Expr::lit(2))),
        ]),
        print(Expr::var("x")),
    ]);

    assert_eq!(output, vec!["1", "2"]);
}

#[test]
fn shadowing_leaves_outer_binding_alone() {
    let output = run_ok(&[
        Stmt::var("x", Expr::lit("outer")),
        Stmt::Block(vec![
            Stmt::var("x", Expr::lit("inner")),
            print(Expr::var("x")),
        ]),
        print(Expr::var("x")),
    ]);

    assert_eq!(output, vec!["inner", "outer"]);
}

#[test]
fn while_with_continue_runs_three_iterations() {
    let output = run_ok(&[
        Stmt::var("counter", Expr::lit(0)),
        Stmt::While(var_below("counter", 3), vec![
            add_assign("counter", 1),
            Stmt::if_then(var_is("counter", 2), Stmt::Continue),
            print(Expr::var("counter")),
        ]),
        print(Expr::var("counter")),
    ]);

    assert_eq!(output, vec!["1", "3", "3"]);
}

#[test]
fn while_with_false_condition_never_runs() {
    let output = run_ok(&[
        Stmt::While(Expr::lit(false), vec![print(Expr::lit("unreachable"))]),
        print(Expr::lit("done")),
    ]);

    assert_eq!(output, vec!["done"]);
}

#[test]
fn for_each_break_stops_consuming_elements() {
    let output = run_ok(&[
        Stmt::for_each("item", ints(&[1, 2, 3, 4, 5]), vec![
            print(Expr::var("item")),
            Stmt::if_then(var_is("item", 3), Stmt::Break),
        ]),
        print(Expr::var("item")),
    ]);

    // The loop variable lives in the enclosing scope and keeps its last value.
    assert_eq!(output, vec!["1", "2", "3", "3"]);
}

#[test]
fn for_each_continue_skips_rest_of_body() {
    let output = run_ok(&[
        Stmt::for_each("item", ints(&[1, 2, 3, 4]), vec![
            Stmt::if_then(
                Expr::binary(Expr::binary(Expr::var("item"), BinaryOp::Rem, Expr::lit(2)), BinaryOp::Equal, Expr::lit(0)),
                Stmt::Continue,
            ),
            print(Expr::var("item")),
        ]),
    ]);

    assert_eq!(output, vec!["1", "3"]);
}

#[test]
fn for_each_over_strings_maps_and_tuples() {
    let output = run_ok(&[
        Stmt::for_each("c", Expr::lit("hi"), vec![print(Expr::var("c"))]),
        Stmt::for_each("k", Expr::Map(vec![(Expr::lit("a"), Expr::lit(1)), (Expr::lit("b"), Expr::lit(2))]), vec![print(Expr::var("k"))]),
        Stmt::for_each("t", Expr::Tuple(vec![Expr::lit(true), Expr::Literal(oryon::ast::Literal::Null)]), vec![print(Expr::var("t"))]),
    ]);

    assert_eq!(output, vec!["h", "i", "a", "b", "true", "null"]);
}

#[test]
fn for_each_over_number_is_not_iterable() {
    let (output, errors) = run(&[
        Stmt::for_each("x", Expr::lit(42), vec![print(Expr::var("x"))]),
        print(Expr::lit("after")),
    ]);

    assert!(output.is_empty());
    assert_eq!(errors.len(), 1);
    assert!(matches!(&errors[0], OryonError::NotIterable { type_tag } if *type_tag == TypeTag::named("int")));
}

#[test]
fn c_style_continue_still_runs_increment() {
    let output = run_ok(&[
        Stmt::for_loop(
            Some(Stmt::var("i", Expr::lit(0))),
            Some(var_below("i", 5)),
            Some(add_assign("i", 1)),
            vec![
                Stmt::if_then(var_is("i", 2), Stmt::Continue),
                print(Expr::var("i")),
            ],
        ),
    ]);

    assert_eq!(output, vec!["0", "1", "3", "4"]);
}

#[test]
fn c_style_initializer_is_scoped_to_loop() {
    let (output, errors) = run(&[
        Stmt::for_loop(Some(Stmt::var("i", Expr::lit(0))), Some(var_below("i", 2)), Some(add_assign("i", 1)), vec![]),
        print(Expr::var("i")),
    ]);

    assert!(output.is_empty());
    assert!(matches!(&errors[..], [OryonError::UndefinedVariable { name }] if name == "i"));
}

#[test]
fn c_style_without_condition_runs_until_break() {
    let output = run_ok(&[
        Stmt::var("n", Expr::lit(0)),
        Stmt::for_loop(None, None, Some(add_assign("n", 1)), vec![
            Stmt::if_then(var_is("n", 3), Stmt::Break),
        ]),
        print(Expr::var("n")),
    ]);

    assert_eq!(output, vec!["3"]);
}

#[test]
fn inner_break_only_exits_inner_loop() {
    let output = run_ok(&[
        Stmt::for_each("outer", ints(&[1, 2]), vec![
            Stmt::for_each("inner", ints(&[10, 20, 30]), vec![
                Stmt::if_then(var_is("inner", 20), Stmt::Break),
                print(Expr::binary(Expr::var("outer"), BinaryOp::Add, Expr::var("inner"))),
            ]),
            print(Expr::var("outer")),
        ]),
    ]);

    assert_eq!(output, vec!["11", "1", "12", "2"]);
}

#[test]
fn break_inside_nested_block_reaches_loop() {
    let output = run_ok(&[
        Stmt::var("i", Expr::lit(0)),
        Stmt::While(Expr::lit(true), vec![
            add_assign("i", 1),
            Stmt::Block(vec![Stmt::Block(vec![Stmt::if_then(
                Expr::logical(var_is("i", 4), LogicalOp::Or, Expr::lit(false)),
                Stmt::Break,
            )])]),
        ]),
        print(Expr::var("i")),
    ]);

    assert_eq!(output, vec!["4"]);
}

#[test]
fn runtime_error_in_body_escapes_loop() {
    let (output, errors) = run(&[
        Stmt::for_each("x", ints(&[1, 2, 3]), vec![
            print(Expr::var("x")),
            Stmt::if_then(var_is("x", 2), Stmt::expr(Expr::var("missing"))),
        ]),
        print(Expr::lit("after")),
    ]);

    assert_eq!(output, vec!["1", "2"]);
    assert!(matches!(&errors[..], [OryonError::UndefinedVariable { name }] if name == "missing"));
}

#[test]
fn break_outside_loop_is_rejected_before_running() {
    let (output, errors) = run(&[
        print(Expr::lit("never printed")),
        Stmt::Break,
    ]);

    assert!(output.is_empty());
    assert!(matches!(&errors[..], [OryonError::MisplacedSignal { signal: Signal::Break, .. }]));
}

#[test]
fn typed_assignment_is_checked() {
    let (output, errors) = run(&[
        Stmt::typed_var("count", "int", false, Some(Expr::lit(1))),
        Stmt::Block(vec![Stmt::expr(Expr::assign("count", Expr::lit(5)))]),
        print(Expr::var("count")),
        Stmt::expr(Expr::assign("count", Expr::lit("five"))),
        print(Expr::lit("unreachable")),
    ]);

    assert_eq!(output, vec!["5"]);
    match &errors[..] {
        [OryonError::Type { name, expected, actual }] => {
            assert_eq!(name, "count");
            assert_eq!(expected, &TypeTag::named("int"));
            assert_eq!(actual, &TypeTag::named("str"));
        }
        other => panic!("expected a single type error, got {:?}", other),
    }
}

#[test]
fn private_variable_visible_from_nested_scopes() {
    let output = run_ok(&[Stmt::Block(vec![
        Stmt::typed_var("secret", "auto", true, Some(Expr::lit(42))),
        Stmt::Block(vec![print(Expr::var("secret"))]),
        Stmt::for_each("x", ints(&[1]), vec![print(Expr::var("secret"))]),
    ])]);

    assert_eq!(output, vec!["42", "42"]);
}

#[test]
fn private_object_field_hidden_from_program() {
    let globals = Environment::new();
    let account = Object::new("Account")
        .with_field("owner", Value::Str("ada".into()), TypeTag::named("str"), false)
        .with_field("balance", Value::Int(100), TypeTag::named("int"), true);
    globals.define("account", Value::Object(Rc::new(account)));

    let (output, errors) = run_with(Interpreter::default().with_globals(globals), &[
        print(Expr::get(Expr::var("account"), "owner")),
        print(Expr::get(Expr::var("account"), "balance")),
    ]);

    assert_eq!(output, vec!["ada"]);
    assert!(matches!(&errors[..], [OryonError::Access { name }] if name == "balance"));
}

#[test]
fn this_is_bound_for_the_program() {
    let mut interpreter = Interpreter::default();
    let object = Value::Object(Rc::new(Object::new("Widget").with_field("id", Value::Int(7), TypeTag::Auto, false)));
    interpreter.bind_this(object).expect("value is present");

    let (output, errors) = run_with(interpreter, &[
        print(Expr::This),
        print(Expr::get(Expr::This, "id")),
    ]);

    assert!(errors.is_empty(), "Did not expect an error, got {:?}", errors);
    assert_eq!(output, vec!["<instance Widget>", "7"]);
}

#[test]
fn globals_are_shared_with_the_host() {
    let globals = Environment::new();
    globals.define("total", Value::Int(0));

    let (_, errors) = run_with(Interpreter::default().with_globals(globals.clone()), &[
        Stmt::for_each("n", ints(&[1, 2, 3]), vec![
            Stmt::expr(Expr::assign("total", Expr::binary(Expr::var("total"), BinaryOp::Add, Expr::var("n")))),
        ]),
    ]);

    assert!(errors.is_empty(), "Did not expect an error, got {:?}", errors);
    assert_eq!(globals.get("total", None).expect("total is defined"), Value::Int(6));
    assert_eq!(globals.get("n", None).expect("loop variable is bound in globals"), Value::Int(3));
}

#[test]
fn interpret_reports_first_error() {
    let result = oryon::interpreter::interpret(&[Stmt::expr(Expr::var("nope"))]);
    assert!(matches!(result, Err(OryonError::UndefinedVariable { .. })));
}
