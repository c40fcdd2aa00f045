//! Property-based tests for the alignment engine.

use dp_aligner::{AlignerError, Aligner, AlignmentMode, AlignmentOutcome, ScoringScheme, Weight};
use proptest::prelude::*;

fn arb_seq() -> impl Strategy<Value = String> {
    "[ACGT]{0,12}"
}

fn arb_non_empty_seq() -> impl Strategy<Value = String> {
    "[ACGT]{1,12}"
}

fn arb_mixed_case_seq() -> impl Strategy<Value = String> {
    "[ACGTacgt]{0,12}"
}

fn arb_any_char_seq() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..10).prop_map(|chars| chars.into_iter().collect())
}

fn arb_score() -> impl Strategy<Value = Weight> {
    prop_oneof![
        -6i32..=6,
        any::<Weight>(),
        Just(Weight::MIN),
        Just(Weight::MAX),
    ]
}

fn run(seq1: &str, seq2: &str, mode: AlignmentMode, scoring: ScoringScheme) -> Result<AlignmentOutcome, AlignerError> {
    Aligner::default()
        .with_alignment_mode(mode)
        .with_scoring(scoring)
        .align(seq1.into(), seq2.into())
}

proptest! {
    #[test]
    fn traceback_never_reports_invalid_state(
        seq1 in arb_seq(),
        seq2 in arb_seq(),
        match_score in arb_score(),
        mismatch in arb_score(),
        gap in arb_score(),
    ) {
        let scoring = ScoringScheme::new(match_score, mismatch, gap);
        for mode in [AlignmentMode::Global, AlignmentMode::Local] {
            let result = run(&seq1, &seq2, mode, scoring);
            prop_assert!(result.is_ok(), "{} {} {:?} {:?}: {:?}", seq1, seq2, mode, scoring, result.err());
        }
    }

    #[test]
    fn any_alphabet_aligns_without_invalid_state(
        seq1 in arb_any_char_seq(),
        seq2 in arb_any_char_seq(),
        match_score in arb_score(),
        mismatch in arb_score(),
        gap in arb_score(),
    ) {
        let scoring = ScoringScheme::new(match_score, mismatch, gap);
        let global = run(&seq1, &seq2, AlignmentMode::Global, scoring);
        prop_assert!(global.is_ok(), "{:?}", global.as_ref().err());
        let global = global.unwrap().alignment;
        prop_assert_eq!(global.aligned_seq1.chars().count(), global.aligned_seq2.chars().count());

        let local = run(&seq1, &seq2, AlignmentMode::Local, scoring);
        prop_assert!(local.is_ok(), "{:?}", local.as_ref().err());
        let local = local.unwrap();
        prop_assert!(local.score >= 0);
        prop_assert_eq!(local.alignment.connector.chars().count(),
            local.alignment.end_position.i.max(local.alignment.end_position.j) + local.alignment.operations.len());
    }

    #[test]
    fn global_score_does_not_increase_with_harsher_gap(
        seq1 in arb_seq(),
        seq2 in arb_seq(),
        match_score in arb_score(),
        mismatch in arb_score(),
        gap in arb_score(),
        delta in 1i32..=4,
    ) {
        let base = run(&seq1, &seq2, AlignmentMode::Global, ScoringScheme::new(match_score, mismatch, gap)).unwrap();
        let harsher = run(&seq1, &seq2, AlignmentMode::Global, ScoringScheme::new(match_score, mismatch, gap.saturating_sub(delta))).unwrap();
        prop_assert!(harsher.score <= base.score);
    }

    #[test]
    fn global_score_does_not_increase_with_harsher_mismatch(
        seq1 in arb_seq(),
        seq2 in arb_seq(),
        match_score in arb_score(),
        mismatch in arb_score(),
        gap in arb_score(),
        delta in 1i32..=4,
    ) {
        let base = run(&seq1, &seq2, AlignmentMode::Global, ScoringScheme::new(match_score, mismatch, gap)).unwrap();
        let harsher = run(&seq1, &seq2, AlignmentMode::Global, ScoringScheme::new(match_score, mismatch.saturating_sub(delta), gap)).unwrap();
        prop_assert!(harsher.score <= base.score);
    }

    #[test]
    fn local_score_is_never_negative(
        seq1 in arb_seq(),
        seq2 in arb_seq(),
        match_score in arb_score(),
        mismatch in arb_score(),
        gap in arb_score(),
    ) {
        let outcome = run(&seq1, &seq2, AlignmentMode::Local, ScoringScheme::new(match_score, mismatch, gap)).unwrap();
        prop_assert!(outcome.score >= 0);
    }

    #[test]
    fn local_score_bounds_global_score_for_penalizing_gaps(
        seq1 in arb_non_empty_seq(),
        seq2 in arb_non_empty_seq(),
        match_score in arb_score(),
        mismatch in arb_score(),
        gap in prop_oneof![-6i32..=0, Weight::MIN..=0],
    ) {
        let scoring = ScoringScheme::new(match_score, mismatch, gap);
        let global = run(&seq1, &seq2, AlignmentMode::Global, scoring).unwrap();
        let local = run(&seq1, &seq2, AlignmentMode::Local, scoring).unwrap();
        prop_assert!(local.score >= global.score);
    }

    #[test]
    fn aligned_lines_reconstruct_the_inputs(
        seq1 in arb_mixed_case_seq(),
        seq2 in arb_mixed_case_seq(),
        match_score in arb_score(),
        mismatch in arb_score(),
        gap in arb_score(),
    ) {
        let scoring = ScoringScheme::new(match_score, mismatch, gap);

        let global = run(&seq1, &seq2, AlignmentMode::Global, scoring).unwrap().alignment;
        prop_assert_eq!(global.aligned_seq1.replace('-', ""), seq1.clone());
        prop_assert_eq!(global.aligned_seq2.replace('-', ""), seq2.clone());
        prop_assert_eq!(global.aligned_seq1.chars().count(), global.aligned_seq2.chars().count());
        prop_assert_eq!(global.connector.chars().count(), global.aligned_seq1.chars().count());

        let local = run(&seq1, &seq2, AlignmentMode::Local, scoring).unwrap().alignment;
        prop_assert_eq!(local.aligned_seq1.replace('-', "").to_uppercase(), seq1.to_uppercase());
        prop_assert_eq!(local.aligned_seq2.replace('-', "").to_uppercase(), seq2.to_uppercase());
    }

    #[test]
    fn reruns_are_identical(
        seq1 in arb_seq(),
        seq2 in arb_seq(),
        match_score in arb_score(),
        mismatch in arb_score(),
        gap in arb_score(),
    ) {
        let scoring = ScoringScheme::new(match_score, mismatch, gap);
        for mode in [AlignmentMode::Global, AlignmentMode::Local] {
            let first = run(&seq1, &seq2, mode, scoring).unwrap();
            let second = run(&seq1, &seq2, mode, scoring).unwrap();
            prop_assert_eq!(first.score, second.score);
            prop_assert_eq!(&first.matrix, &second.matrix);
            prop_assert_eq!(&first.alignment, &second.alignment);
        }
    }
}
