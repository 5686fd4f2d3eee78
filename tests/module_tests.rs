use tulip::ast::{Module, ModuleItem, Pattern, Syntax};
use tulip::{Session, Source};

fn parse(input: &str) -> Module {
    tulip::parse_module(input).unwrap_or_else(|err| panic!("failed to parse {input:?}: {err}"))
}

fn error(input: &str) -> String {
    tulip::parse_module(input)
        .expect_err("input should not parse")
        .to_string()
}

#[test]
fn empty_module() {
    let module = parse("@module main");
    assert_eq!(module.name.name(), "main");
    assert!(module.params.is_empty());
    assert!(module.items.is_empty());
}

#[test]
fn module_with_definitions() {
    let module = parse("@module main\n+x = 1\n+y = 2\n");
    let names: Vec<&str> = module.definitions().map(|d| d.name.name()).collect();
    assert_eq!(names, vec!["x", "y"]);
    assert_eq!(module.submodules().count(), 0);
}

#[test]
fn module_parameters() {
    let module = parse("@module list %eq t\n+x = t");
    assert_eq!(module.params.len(), 2);
    assert!(matches!(&module.params[0], Pattern::Named(check) if check.name() == "eq"));
    assert!(matches!(&module.params[1], Pattern::Var(name) if name.name() == "t"));
}

#[test]
fn leading_comments_and_blank_lines() {
    let module = parse("# a file\n\n@module main\n\n# first\n+x = 1\n\n\n+y = 2 # trailing\n");
    assert_eq!(module.items.len(), 2);
}

#[test]
fn items_on_one_line() {
    let module = parse("@module main; +x = 1; +y = 2");
    assert_eq!(module.items.len(), 2);
}

#[test]
fn definition_bodies_span_lines() {
    let module = parse("@module main\n+total xs = xs >\n  sum\n+x = 1\n");
    assert_eq!(module.items.len(), 2);
    let total = module.definitions().next().unwrap();
    assert!(matches!(total.body.as_ref(), Syntax::Chain(stages) if stages.len() == 2));
}

#[test]
fn nested_module() {
    let module = parse("@module main\n@module inner a = [\n  +x = a\n]\n+y = 1\n");
    assert_eq!(module.items.len(), 2);

    let ModuleItem::Module(inner) = &module.items[0] else {
        panic!("expected a nested module first");
    };
    assert_eq!(inner.name.name(), "inner");
    assert_eq!(inner.params.len(), 1);
    assert_eq!(inner.items.len(), 1);
    assert!(matches!(&module.items[1], ModuleItem::Definition(def) if def.name.name() == "y"));
}

#[test]
fn nested_module_on_one_line() {
    let module = parse("@module main\n@module m = [+x = 1]\n");
    let inner = module.submodules().next().unwrap();
    assert_eq!(inner.items.len(), 1);
}

#[test]
fn empty_nested_module() {
    let module = parse("@module main\n@module m = []\n");
    let inner = module.submodules().next().unwrap();
    assert!(inner.items.is_empty());
}

#[test]
fn deeply_nested_modules() {
    let input = "@module a\n@module b = [\n  @module c = [\n    +x = 1\n  ]\n  +y = 2\n]\n";
    let module = parse(input);
    let b = module.submodules().next().unwrap();
    let c = b.submodules().next().unwrap();
    assert_eq!(b.items.len(), 2);
    assert_eq!(c.definitions().count(), 1);
}

#[test]
fn module_symbols_are_interned() {
    let mut session = Session::new();
    let module = session
        .parse_module(&Source::from_string("@module main\n+x = x\n"))
        .unwrap();

    let def = module.definitions().next().unwrap();
    let x = session.intern("x");
    assert_eq!(def.name, x);
    assert_eq!(*def.body, Syntax::Var(x));
}

#[test]
fn missing_module_header() {
    assert_eq!(error("+x = 1"), "1:1: expected '@module', found '+'");
}

#[test]
fn bare_expression_is_not_an_item() {
    assert_eq!(
        error("@module main\nx"),
        "2:1: expected end of input, found 'x'"
    );
}

#[test]
fn module_name_must_be_an_ident() {
    assert_eq!(error("@module 1"), "1:9: expected ident, found '1'");
}

#[test]
fn nested_module_needs_equal_sign() {
    assert_eq!(
        error("@module main\n@module m [+x = 1]"),
        "2:11: expected '=', found '['"
    );
}

#[test]
fn unclosed_nested_module() {
    assert_eq!(
        error("@module main\n@module m = [\n+x = 1\n"),
        "4:1: expected ']', found end of input"
    );
}

#[test]
fn only_one_top_level_module() {
    assert_eq!(
        error("@module a\n@module b\n"),
        "2:10: expected '=', found newline"
    );
}

#[test]
fn module_consumes_the_whole_input() {
    let mut session = Session::new();
    let module = session
        .parse_module(&Source::from_string("@module m\n+x = 1"))
        .unwrap();

    let x = session.intern("x");
    assert_eq!(module.name, session.intern("m"));
    assert!(module.params.is_empty());
    assert_eq!(
        module.items,
        vec![ModuleItem::Definition(tulip::ast::Definition::new(
            x,
            vec![],
            Syntax::Int(1)
        ))]
    );
}

#[test]
fn very_deep_nested_modules_are_an_error() {
    let depth = 200;
    let input = format!("@module main\n{}{}", "@module m = [".repeat(depth), "]".repeat(depth));
    let message = error(&input);
    assert!(message.ends_with("expected less deeply nested module, found '@'"), "{message}");
}
