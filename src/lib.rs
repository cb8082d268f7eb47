//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! stoat_sat implements conflict-driven clause-learning (CDCL) solving with an explicit trail of
//! assignments, unit propagation to a fixpoint, conflict analysis by resolution to a first unique
//! implication point, and non-chronological backtracking.
//!
//! The library is designed around the core structure of a [context](crate::context).
//!
//! A context owns a [formula](crate::structures::formula) and a [trail](crate::db::trail), built
//! from a [configuration](crate::config).
//! Clauses may be added [programatically](crate::context::GenericContext::add_clause) over fresh
//! atoms, or as slices of [non-zero integers](crate::context::GenericContext::add_clause_ints)
//! whose magnitude identifies a variable and whose sign gives the polarity of a literal.
//!
//! At a high level, a solve is a loop over three procedures:
//! - [Propagation](crate::procedures::bcp) of the consequences of the current valuation.
//! - A [decision](crate::procedures::decision) on the value of some unvalued atom, when
//!   propagation settles without conflict.
//! - [Analysis](crate::procedures::analysis) of a conflict, adding a clause to the formula and
//!   [backjumping](crate::procedures::backjump) to the level at which the clause asserts a
//!   literal.
//!
//! The loop ends when every atom has a value (the formula is satisfiable on the valuation of the
//! trail) or a conflict is independent of any decision (the formula is unsatisfiable).
//!
//! # Example
//!
//! ```rust
//! # use stoat_sat::config::Config;
//! # use stoat_sat::context::Context;
//! # use stoat_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! the_context.add_clause_ints(&[-1, 2]).unwrap();
//! the_context.add_clause_ints(&[-2]).unwrap();
//!
//! assert!(the_context.solve().is_ok());
//! assert_eq!(the_context.report(), Report::Satisfiable);
//! assert_eq!(the_context.solution(), Some(vec![-1, -2]));
//! ```
//!
//! # Notes
//!
//! - Learnt clauses are kept for the life of a context; there is no clause deletion, and no
//!   restart scheme.
//! - Each context is independent, so distinct formulas may be solved on distinct threads without
//!   synchronisation.
//! - Calls to the [log] macros are made throughout the library, though no log implementation is
//!   provided.

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
