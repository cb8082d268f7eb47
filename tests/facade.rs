use stoat_sat::{
    context::Context,
    reports::Report,
    types::err::{BuildError, ErrorKind},
};

/// True if each clause contains some literal of the assignment.
fn satisfies(clauses: &[Vec<i32>], assignment: &[i32]) -> bool {
    clauses
        .iter()
        .all(|clause| clause.iter().any(|literal| assignment.contains(literal)))
}

mod scenarios {
    use super::*;

    #[test]
    fn exclusive_pair() {
        let clauses = vec![vec![1, 2], vec![-1, -2]];
        let mut ctx = Context::from_clauses(&clauses).unwrap();

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        let solution = ctx.solution().unwrap();
        assert!(solution == vec![1, -2] || solution == vec![-1, 2]);
    }

    #[test]
    fn complementary_units() {
        let mut ctx = Context::from_clauses(&[vec![1], vec![-1]]).unwrap();

        assert!(ctx.solve().is_ok());

        assert_eq!(ctx.report(), Report::Unsatisfiable);
        assert_eq!(ctx.solution(), None);

        // The conflict precedes any decision.
        assert_eq!(ctx.counters.total_decisions, 0);
    }

    #[test]
    fn forced_variable() {
        let clauses = vec![vec![-1, 2, 3], vec![-1, 3, -5], vec![-5]];
        let mut ctx = Context::from_clauses(&clauses).unwrap();

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        let solution = ctx.solution().unwrap();
        assert!(solution.contains(&-5));
        assert!(satisfies(&clauses, &solution));

        // One integer for each of the four variables, in variable order.
        assert_eq!(
            solution.iter().map(|l| l.abs()).collect::<Vec<_>>(),
            vec![1, 2, 3, 5]
        );
    }

    #[test]
    fn exactly_one() {
        let clauses = vec![vec![1, 2, 3], vec![-1, -2], vec![-1, -3], vec![-2, -3]];
        let mut ctx = Context::from_clauses(&clauses).unwrap();

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        let solution = ctx.solution().unwrap();
        assert!(satisfies(&clauses, &solution));
        assert_eq!(solution.iter().filter(|l| l.is_positive()).count(), 1);
    }
}

mod input {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        let result = Context::from_clauses(&[vec![1, 0, 2]]);

        assert!(matches!(
            result,
            Err(ErrorKind::Build(BuildError::ZeroLiteral))
        ));
    }

    #[test]
    fn zero_is_rejected_before_any_solve() {
        let mut ctx = Context::from_clauses(&[vec![1]]).unwrap();

        assert_eq!(
            ctx.add_clause_ints(&[0]),
            Err(ErrorKind::Build(BuildError::ZeroLiteral))
        );

        // The rejection is not a verdict on the formula.
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn an_empty_clause_is_unsatisfiable_not_an_error() {
        let mut ctx = Context::from_clauses(&[vec![1, 2], vec![]]).unwrap();

        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }

    #[test]
    fn variable_ids_are_arbitrary() {
        let clauses = vec![vec![-9], vec![3], vec![9, -7]];
        let mut ctx = Context::from_clauses(&clauses).unwrap();

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        // Sorted by variable, whatever the magnitudes used.
        assert_eq!(ctx.solution(), Some(vec![3, -7, -9]));
    }
}
