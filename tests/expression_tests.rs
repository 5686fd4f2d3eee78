use tulip::ast::{Definition, Syntax};
use tulip::{Session, Source};

fn dump(input: &str) -> String {
    tulip::parse_expression(input)
        .unwrap_or_else(|err| panic!("failed to parse {input:?}: {err}"))
        .to_string()
}

fn error(input: &str) -> String {
    tulip::parse_expression(input)
        .expect_err("input should not parse")
        .to_string()
}

#[test]
fn single_atom_is_not_wrapped() {
    let tree = tulip::parse_expression("x").unwrap();
    assert!(matches!(tree, Syntax::Var(_)));
}

#[test]
fn application_keeps_source_order() {
    let mut session = Session::new();
    let tree = session
        .parse_expression(&Source::from_string("f x 1"))
        .unwrap();

    let expected = Syntax::Apply(vec![
        Syntax::Var(session.intern("f")),
        Syntax::Var(session.intern("x")),
        Syntax::Int(1),
    ]);
    assert_eq!(tree, expected);
}

#[test]
fn chain_keeps_source_order() {
    assert_eq!(dump("a > b > c"), "(chain a b c)");
}

#[test]
fn chain_stages_are_applications() {
    assert_eq!(
        dump("xs > map f > fold 0 add"),
        "(chain xs (apply map f) (apply fold 0 add))"
    );
}

#[test]
fn chain_without_spaces() {
    assert_eq!(dump("a>b"), "(chain a b)");
}

#[test]
fn chain_continues_after_angle_at_line_end() {
    assert_eq!(dump("xs >\n  map f >\n  sum"), "(chain xs (apply map f) sum)");
}

#[test]
fn chain_continues_with_angle_on_next_line() {
    assert_eq!(dump("xs\n  > map f\n  > sum"), "(chain xs (apply map f) sum)");
}

#[test]
fn chain_with_comments_between_stages() {
    let input = "xs # the input\n  > map f # transform\n  > sum";
    assert_eq!(dump(input), "(chain xs (apply map f) sum)");
}

#[test]
fn chain_needs_a_stage_after_angle() {
    assert_eq!(error("a >"), "1:4: expected expression, found end of input");
}

#[test]
fn parenthesized_expression_is_grouping_only() {
    assert_eq!(dump("(x)"), "x");
    assert_eq!(dump("f (g x)"), "(apply f (apply g x))");
    assert_eq!(dump("(a > b) c"), "(apply (chain a b) c)");
}

#[test]
fn parentheses_may_span_lines() {
    assert_eq!(dump("f (\n  g x\n)"), "(apply f (apply g x))");
}

#[test]
fn unclosed_parenthesis() {
    assert_eq!(error("f (x"), "1:5: expected ')', found end of input");
}

#[test]
fn tags_are_atoms() {
    assert_eq!(dump(".some x"), "(apply .some x)");
}

#[test]
fn autovar_outside_lambda_is_still_parsed() {
    assert_eq!(dump("f $"), "(apply f $)");
}

#[test]
fn single_definition_makes_a_let() {
    let mut session = Session::new();
    let tree = session
        .parse_expression(&Source::from_string("+x = 1\nx"))
        .unwrap();

    let x = session.intern("x");
    let expected = Syntax::with_bindings(
        vec![Definition::new(x.clone(), vec![], Syntax::Int(1))],
        Syntax::Var(x),
    );
    assert_eq!(tree, expected);
    assert!(matches!(tree, Syntax::Let(ref l) if l.bindings.len() == 1));
}

#[test]
fn several_definitions_share_one_let() {
    assert_eq!(
        dump("+x = 1\n+y = 2\nadd x y"),
        "(let ((def x () 1) (def y () 2)) (apply add x y))"
    );
}

#[test]
fn definitions_separated_by_semicolons() {
    assert_eq!(
        dump("+x = 1; +y = 2; add x y"),
        "(let ((def x () 1) (def y () 2)) (apply add x y))"
    );
}

#[test]
fn definition_body_can_hold_its_own_bindings() {
    assert_eq!(
        dump("+f x = +y = x; y; f 1"),
        "(let ((def f (x) (let ((def y () x)) y))) (apply f 1))"
    );
}

#[test]
fn let_inside_parentheses() {
    assert_eq!(
        dump("g (+x = 1; x)"),
        "(apply g (let ((def x () 1)) x))"
    );
}

#[test]
fn definition_body_is_a_chain() {
    assert_eq!(
        dump("+total = xs > sum\ntotal"),
        "(let ((def total () (chain xs sum))) total)"
    );
}

#[test]
fn definition_needs_a_body() {
    assert_eq!(error("+x ="), "1:5: expected expression, found end of input");
}

#[test]
fn definition_needs_an_equal_sign() {
    assert_eq!(error("+x 1"), "1:4: expected '=', found '1'");
}

#[test]
fn definition_without_a_following_expression() {
    assert_eq!(error("+x = 1"), "1:7: expected expression, found end of input");
}

#[test]
fn plus_is_not_an_operator() {
    assert_eq!(error("1 + 2"), "1:3: expected end of input, found '+'");
}

#[test]
fn trailing_garbage() {
    assert_eq!(error("f x )"), "1:5: expected end of input, found ')'");
}

#[test]
fn equal_names_share_a_symbol() {
    let mut session = Session::new();
    let first = session
        .parse_expression(&Source::from_string("foo"))
        .unwrap();
    let second = session
        .parse_expression(&Source::from_string("bar foo"))
        .unwrap();

    let Syntax::Apply(parts) = second else {
        panic!("expected an application");
    };
    assert_eq!(first, parts[1]);
    assert_eq!(session.interner().len(), 2);
}

#[test]
fn separate_sessions_do_not_share_symbols() {
    let first = tulip::parse_expression("foo").unwrap();
    let second = tulip::parse_expression("foo").unwrap();
    assert_ne!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn identifiers_parse_to_themselves() {
    for name in ["a", "z", "abc", "a1", "a-b", "a_b", "x-1_y", "q--", "m9_"] {
        let tree = tulip::parse_expression(name).unwrap();
        assert!(matches!(&tree, Syntax::Var(sym) if sym.name() == name), "{name}");
    }
}

#[test]
fn application_without_angle_is_not_a_chain() {
    let tree = tulip::parse_expression("f x").unwrap();
    assert!(matches!(&tree, Syntax::Apply(parts) if parts.len() == 2));
}

#[test]
fn comments_do_not_change_the_tree() {
    let mut session = Session::new();
    let with_comment = session
        .parse_expression(&Source::from_string("x  # trailing comment\n"))
        .unwrap();
    let plain = session
        .parse_expression(&Source::from_string("x\n"))
        .unwrap();
    assert_eq!(with_comment, plain);
}

#[test]
fn one_source_parses_repeatedly() {
    let source = Source::from_string("f x");
    let mut session = Session::new();
    let first = session.parse_expression(&source).unwrap();
    let second = session.parse_expression(&source).unwrap();
    assert_eq!(first, second);
    assert_eq!(source.len(), 3);
}

/// Runs `f` on a thread with enough stack for the deepest accepted nesting in a debug build.
fn on_large_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    std::thread::Builder::new()
        .stack_size(16 * 1024 * 1024)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap()
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let depth = tulip::parser::MAX_DEPTH;
    let input = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(on_large_stack(move || dump(&input)), "x");
}

#[test]
fn very_deep_parentheses_are_an_error() {
    let depth = 100_000;
    let input = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(
        on_large_stack(move || error(&input)),
        "1:130: expected less deeply nested expression, found '('"
    );
}

#[test]
fn very_deep_definition_bodies_are_an_error() {
    let input = format!("{}x", "+a = ".repeat(200));
    let message = on_large_stack(move || error(&input));
    assert!(message.ends_with("expected less deeply nested expression, found '+'"), "{message}");
}
