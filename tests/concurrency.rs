use std::thread;

use safecalc::{Calculator, evaluate_expression, interpreter::whitelist::Whitelist, limits::Limits};

const EXPRESSIONS: [&str; 6] =
    ["sin(1) * cos(2)", "2 ^ 0.5", "ln(10) / log(10)", "-7 % 3", "sqrt(2) + pi", "1 / 0"];

#[test]
fn concurrent_evaluations_agree_with_sequential_ones() {
    let expected = EXPRESSIONS.map(|src| evaluate_expression(src).map(f64::to_bits));

    thread::scope(|scope| {
        let handles = (0..8).map(|_| {
                                scope.spawn(|| {
                                         (0..50).map(|_| {
                                                    EXPRESSIONS.map(|src| {
                                                                   evaluate_expression(src).map(f64::to_bits)
                                                               })
                                                })
                                                .collect::<Vec<_>>()
                                     })
                            })
                            .collect::<Vec<_>>();

        for handle in handles {
            for round in handle.join().unwrap() {
                assert_eq!(round, expected);
            }
        }
    });
}

#[test]
fn one_calculator_is_shared_across_threads() {
    let whitelist = Whitelist::full().without_name("tan");
    let calculator = Calculator::new(Limits::default().with_max_depth(20), &whitelist);

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                     assert_eq!(calculator.evaluate("abs(-3) + 1").unwrap(), 4.0);
                     assert!(calculator.evaluate("tan(1)").is_err());
                 });
        }
    });
}
