//! Contexts share nothing, so distinct formulas may be solved on distinct threads without any
//! synchronisation.

use stoat_sat::{context::Context, reports::Report};

#[test]
fn independent_contexts_on_independent_threads() {
    let instances: Vec<(Vec<Vec<i32>>, Report)> = vec![
        (vec![vec![1, 2], vec![-1, -2]], Report::Satisfiable),
        (vec![vec![1], vec![-1]], Report::Unsatisfiable),
        (
            vec![vec![-1, 2, 3], vec![-1, 3, -5], vec![-5]],
            Report::Satisfiable,
        ),
        (
            vec![vec![1, 2], vec![-1, 2], vec![-2, 1], vec![-1, -2]],
            Report::Unsatisfiable,
        ),
    ];

    crossbeam::scope(|scope| {
        for (clauses, expectation) in &instances {
            scope.spawn(move |_| {
                let mut ctx = Context::from_clauses(clauses).unwrap();
                assert!(ctx.solve().is_ok());
                assert_eq!(ctx.report(), *expectation);

                if let Some(solution) = ctx.solution() {
                    for clause in clauses {
                        assert!(clause.iter().any(|literal| solution.contains(literal)));
                    }
                }
            });
        }
    })
    .unwrap();
}
