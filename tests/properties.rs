use proptest::prelude::*;
use safecalc::{error::FailureKind, evaluate_expression, interpreter::whitelist::Whitelist};

fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(0u32..1000).prop_map(|n| n.to_string()),
                           (0.0f64..100.0).prop_map(|x| format!("{x:?}")),
                           Just("pi".to_string()),
                           Just("e".to_string()),];

    leaf.prop_recursive(4, 32, 2, |inner| {
            prop_oneof![(inner.clone(),
                         prop::sample::select(vec!["+", "-", "*", "/", "%", "^"]),
                         inner.clone()).prop_map(|(l, op, r)| format!("{l} {op} {r}")),
                        inner.clone().prop_map(|e| format!("({e})")),
                        inner.clone().prop_map(|e| format!("-{e}")),
                        (prop::sample::select(vec!["sin", "cos", "tan", "sqrt", "abs", "log", "ln"]),
                         inner).prop_map(|(f, e)| format!("{f}({e})")),]
        })
}

fn unknown_name() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,8}".prop_filter("must not be whitelisted", |name| {
                              let whitelist = Whitelist::standard();
                              whitelist.constant(name).is_none() && whitelist.function(name).is_none()
                          })
}

proptest! {
    #[test]
    fn whitelisted_expressions_only_fail_numerically(src in expression()) {
        match evaluate_expression(&src) {
            Ok(_) => {},
            Err(e) => prop_assert!(matches!(e.kind(), FailureKind::DomainError | FailureKind::DivisionByZero),
                                   "{src}: {e}"),
        }
    }

    #[test]
    fn evaluation_is_deterministic(src in expression()) {
        let first = evaluate_expression(&src).map(f64::to_bits);
        let second = evaluate_expression(&src).map(f64::to_bits);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unknown_names_are_rejected(name in unknown_name()) {
        let failure = evaluate_expression(&name).unwrap_err();
        prop_assert_eq!(failure.kind(), FailureKind::UnknownIdentifier(name.clone()));

        let failure = evaluate_expression(&format!("1 + {name}(2)")).unwrap_err();
        prop_assert_eq!(failure.kind(), FailureKind::UnknownFunction(name));
    }

    #[test]
    fn arbitrary_text_never_panics(src in "\\PC{0,64}") {
        let _ = evaluate_expression(&src);
    }

    #[test]
    fn arbitrary_bytes_from_the_token_alphabet_never_panic(src in "[0-9a-z+*/%^(),=. -]{0,64}") {
        let _ = evaluate_expression(&src);
    }

    #[test]
    fn sums_and_products_match_f64(a in -1e6f64..1e6, b in -1e6f64..1e6) {
        prop_assert_eq!(evaluate_expression(&format!("({a:?}) + ({b:?})")).unwrap(), a + b);
        prop_assert_eq!(evaluate_expression(&format!("({a:?}) * ({b:?})")).unwrap(), a * b);
        prop_assert_eq!(evaluate_expression(&format!("({a:?}) - ({b:?})")).unwrap(), a - b);
    }
}
