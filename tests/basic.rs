use stoat_sat::{builder::ClauseOk, config::Config, context::Context, reports::Report};

mod basic {
    use stoat_sat::structures::literal::Literal;

    use super::*;

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_literal();

        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(vec![p]));

        assert!(ctx.solve().is_ok());

        assert_eq!(ctx.report(), Report::Satisfiable);
        assert_eq!(ctx.value_of(p.atom()), Some(true));
    }

    #[test]
    fn empty_formula() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.solve().is_ok());

        assert_eq!(ctx.report(), Report::Satisfiable);
        assert_eq!(ctx.solution(), Some(vec![]));
    }

    #[test]
    fn conflict() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.fresh_or_max_literal();
        let q = ctx.fresh_or_max_literal();

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());

        assert!(ctx.solve().is_ok());
        assert!(matches!(ctx.report(), Report::Unsatisfiable));
        assert!(ctx.unsatisfiable_clause().is_ok());
    }

    #[test]
    fn unit_conjunct() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.fresh_or_max_literal();
        let q = ctx.fresh_or_max_literal();

        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(vec![p, q]));
        assert!(ctx.add_clause(vec![-p]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert_eq!(ctx.value_of(p.atom()), Some(false));
        assert_eq!(ctx.value_of(q.atom()), Some(true));
    }

    #[test]
    fn duplicates_are_merged() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.fresh_or_max_literal();
        let q = ctx.fresh_or_max_literal();

        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(vec![p, q, p, q, p]));

        assert_eq!(ctx.formula.clause_count(), 1);
        assert_eq!(ctx.formula.clause(0).len(), 2);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn tautologies_are_skipped() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.fresh_or_max_literal();

        assert_eq!(Ok(ClauseOk::Tautology), ctx.add_clause(vec![p, -p]));
        assert_eq!(ctx.formula.clause_count(), 0);

        // Though the atom of the tautology is part of the universe.
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(ctx.value_of(p.atom()).is_some());
    }

    #[test]
    fn report_before_a_solve_is_unknown() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_literal();

        assert!(ctx.add_clause(vec![p]).is_ok());

        assert_eq!(ctx.report(), Report::Unknown);
        assert_eq!(ctx.solution(), None);
    }
}

mod chains {
    use super::*;

    #[test]
    fn implication_chain_settles_by_propagation() {
        let mut ctx = Context::from_config(Config::default());

        let literals = (0..5).map(|_| ctx.fresh_or_max_literal()).collect::<Vec<_>>();
        let [p, q, r, s, t] = *literals.as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.add_clause(vec![-q, r]).is_ok());
        assert!(ctx.add_clause(vec![-r, s]).is_ok());
        assert!(ctx.add_clause(vec![-s, t]).is_ok());
        assert!(ctx.add_clause(vec![p]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        // Everything is forced before any decision.
        assert_eq!(ctx.counters.total_decisions, 0);
        assert_eq!(ctx.solution(), Some(vec![1, 2, 3, 4, 5]));
    }

    #[test]
    fn broken_chain_is_unsatisfiable() {
        let mut ctx = Context::from_config(Config::default());

        let literals = (0..3).map(|_| ctx.fresh_or_max_literal()).collect::<Vec<_>>();
        let [p, q, r] = *literals.as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.add_clause(vec![-q, r]).is_ok());
        assert!(ctx.add_clause(vec![p]).is_ok());
        assert!(ctx.add_clause(vec![-r]).is_ok());

        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }
}
