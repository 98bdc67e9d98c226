//! Property tests for undo/redo round trips
//!
//! Random move sequences over the sample roster. Subjects are never the
//! root and never their own target; targets may be the subject's own
//! descendants.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{id, sample_chart};
use orgledger_core::rules::validate_tree;
use proptest::prelude::*;

fn moves() -> impl Strategy<Value = Vec<(u32, u32)>> {
    let single = (2u32..=15, 1u32..=15).prop_filter("self move", |(s, t)| s != t);
    prop::collection::vec(single, 1..12)
}

proptest! {
    #[test]
    fn prop_undo_all_restores_initial_tree(moves in moves()) {
        let mut chart = sample_chart();
        let initial = chart.store().clone();

        for (subject, target) in &moves {
            chart.move_employee(id(*subject), id(*target)).unwrap();
        }
        for _ in &moves {
            prop_assert!(chart.undo().unwrap());
        }

        prop_assert_eq!(chart.store(), &initial);
        prop_assert!(!chart.undo().unwrap());
    }

    #[test]
    fn prop_redo_all_reproduces_tip(moves in moves()) {
        let mut chart = sample_chart();
        for (subject, target) in &moves {
            chart.move_employee(id(*subject), id(*target)).unwrap();
        }
        let tip = chart.store().clone();

        while chart.undo().unwrap() {}
        while chart.redo().unwrap() {}

        prop_assert_eq!(chart.store(), &tip);
        prop_assert_eq!(chart.history().position(), moves.len());
    }

    #[test]
    fn prop_each_undo_reverts_exactly_one_move(moves in moves()) {
        let mut chart = sample_chart();
        let mut states = vec![chart.store().clone()];
        for (subject, target) in &moves {
            chart.move_employee(id(*subject), id(*target)).unwrap();
            states.push(chart.store().clone());
        }

        for expected in states.iter().rev().skip(1) {
            chart.undo().unwrap();
            prop_assert_eq!(chart.store(), expected);
        }
    }

    #[test]
    fn prop_moves_keep_a_tree(moves in moves()) {
        let mut chart = sample_chart();
        for (subject, target) in &moves {
            chart.move_employee(id(*subject), id(*target)).unwrap();
        }

        prop_assert!(validate_tree(chart.store()).is_ok());
    }
}
