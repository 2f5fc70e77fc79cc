use pretty_assertions::assert_eq;
use safecalc::{
    Calculator,
    ast::{BinaryOperator, NodeKind, UnaryOperator},
    error::{FailureKind, ValidationError},
    interpreter::{
        evaluator::core::evaluate,
        parser::core::parse_source,
        symbols::{BUILTIN_FUNCTIONS, CONSTANTS},
        validator::validate,
        whitelist::Whitelist,
    },
    limits::Limits,
};

fn check(src: &str, whitelist: &Whitelist) -> Result<(), ValidationError> {
    let expr = parse_source(src, &Limits::default()).unwrap();
    validate(&expr, whitelist).map(|_| ())
}

#[test]
fn standard_whitelist_names() {
    let whitelist = Whitelist::standard();
    assert_eq!(whitelist.function_names().collect::<Vec<_>>(),
               vec!["sin", "cos", "tan", "sqrt", "abs", "log", "ln"]);
    assert_eq!(whitelist.constant_names().collect::<Vec<_>>(), vec!["pi", "e"]);
    assert_eq!(whitelist.function_names().collect::<Vec<_>>(), BUILTIN_FUNCTIONS);
    assert_eq!(whitelist.constant_names().collect::<Vec<_>>(),
               CONSTANTS.iter().map(|c| c.name).collect::<Vec<_>>());

    for op in BinaryOperator::ALL {
        assert!(whitelist.allows_operator(op), "{op}");
    }
    for kind in NodeKind::ALL {
        assert!(whitelist.allows_node_kind(kind), "{kind}");
    }
}

#[test]
fn rejected_node_kind() {
    let whitelist = Whitelist::full().without_node_kind(NodeKind::Call);
    assert_eq!(check("sqrt(4)", &whitelist),
               Err(ValidationError::UnsupportedConstruct { kind:     NodeKind::Call,
                                                           position: 0, }));
    // The kind is checked before the name.
    assert_eq!(check("1 + exec(2)", &whitelist),
               Err(ValidationError::UnsupportedConstruct { kind:     NodeKind::Call,
                                                           position: 4, }));
    assert!(check("1 + pi", &whitelist).is_ok());
}

#[test]
fn rejected_operator_deep_in_tree() {
    let whitelist = Whitelist::full().without_operator(BinaryOperator::Pow);
    assert_eq!(check("1 + sin(2 ^ 2)", &whitelist),
               Err(ValidationError::UnsupportedOperator { op:       BinaryOperator::Pow,
                                                          position: 10, }));
    assert!(check("1 + sin(2 * 2)", &whitelist).is_ok());
}

#[test]
fn rejected_unary_operator() {
    let whitelist = Whitelist::full().without_unary_operator(UnaryOperator::Minus);
    assert_eq!(check("2 * -3", &whitelist),
               Err(ValidationError::UnsupportedUnaryOperator { op:       UnaryOperator::Minus,
                                                               position: 4, }));
    assert!(check("+3 - 1", &whitelist).is_ok());
}

#[test]
fn removed_names_are_unknown() {
    let whitelist = Whitelist::full().without_name("pi").without_name("sqrt");
    assert_eq!(check("2 * pi", &whitelist),
               Err(ValidationError::UnknownIdentifier { name:     "pi".to_string(),
                                                        position: 4, }));
    assert_eq!(check("sqrt(4)", &whitelist),
               Err(ValidationError::UnknownFunction { name:     "sqrt".to_string(),
                                                      position: 0, }));
    assert!(check("e + abs(-1)", &whitelist).is_ok());
}

#[test]
fn constants_and_functions_are_removed_separately() {
    let whitelist = Whitelist::full().without_constant("e");
    assert!(whitelist.constant("e").is_none());
    assert_eq!(whitelist.constant("pi"), Some(std::f64::consts::PI));
    assert_eq!(whitelist.function_names().collect::<Vec<_>>(), BUILTIN_FUNCTIONS);

    let whitelist = Whitelist::full().without_function("sqrt").without_function("pi");
    assert_eq!(check("sqrt(4)", &whitelist),
               Err(ValidationError::UnknownFunction { name:     "sqrt".to_string(),
                                                      position: 0, }));
    assert_eq!(whitelist.constant_names().collect::<Vec<_>>(), vec!["pi", "e"]);
    assert!(check("abs(-1) * pi", &whitelist).is_ok());
}

#[test]
fn constants_are_not_callable_and_functions_are_not_values() {
    let whitelist = Whitelist::standard();
    assert_eq!(check("pi(2)", whitelist),
               Err(ValidationError::UnknownFunction { name:     "pi".to_string(),
                                                      position: 0, }));
    assert_eq!(check("sqrt + 1", whitelist),
               Err(ValidationError::UnknownIdentifier { name:     "sqrt".to_string(),
                                                        position: 0, }));
}

#[test]
fn checks_run_in_order() {
    let whitelist = Whitelist::standard();

    // Name before keywords.
    assert_eq!(check("exec(x = 1)", whitelist),
               Err(ValidationError::UnknownFunction { name:     "exec".to_string(),
                                                      position: 0, }));
    // Keywords before arity.
    assert_eq!(check("sqrt(y = 1)", whitelist),
               Err(ValidationError::KeywordArgumentsNotAllowed { function: "sqrt".to_string(),
                                                                 keyword:  "y".to_string(),
                                                                 position: 5, }));
    // Children before arity.
    assert_eq!(check("sin(os, 1)", whitelist),
               Err(ValidationError::UnknownIdentifier { name:     "os".to_string(),
                                                        position: 4, }));
    // Left operand before right.
    assert_eq!(check("a + b", whitelist),
               Err(ValidationError::UnknownIdentifier { name:     "a".to_string(),
                                                        position: 0, }));
    assert_eq!(check("cos(1, 2)", whitelist),
               Err(ValidationError::ArityMismatch { name:     "cos".to_string(),
                                                    expected: 1,
                                                    found:    2,
                                                    position: 0, }));
}

#[test]
fn validated_tree_evaluates_against_its_whitelist() {
    let whitelist = Whitelist::full().without_name("e");
    let expr = parse_source("pi * 2", &Limits::default()).unwrap();
    let validated = validate(&expr, &whitelist).unwrap();
    assert_eq!(evaluate(validated).unwrap(), std::f64::consts::PI * 2.0);
}

#[test]
fn calculator_uses_narrowed_whitelist() {
    let whitelist = Whitelist::full().without_operator(BinaryOperator::Mod);
    let limits = Limits::default().with_max_depth(8);
    let calculator = Calculator::new(limits, &whitelist);
    assert_eq!(calculator.limits(), &limits);
    assert!(!calculator.whitelist().allows_operator(BinaryOperator::Mod));

    assert_eq!(calculator.evaluate("7 / 2").unwrap(), 3.5);
    assert_eq!(calculator.evaluate("7 % 2").unwrap_err().kind(),
               FailureKind::UnsupportedOperator);
}

#[test]
fn failure_kinds_name_their_phase() {
    let calculator = Calculator::default();
    for (src, syntax, rejection) in [("(1", true, false),
                                     ("", true, false),
                                     ("exec(1)", false, true),
                                     ("sqrt(1, 2)", false, true),
                                     ("sqrt(-1)", false, false),
                                     ("1 % 0", false, false)]
    {
        let kind = calculator.evaluate(src).unwrap_err().kind();
        assert_eq!((kind.is_syntax(), kind.is_rejection()), (syntax, rejection), "{src}");
    }
}
