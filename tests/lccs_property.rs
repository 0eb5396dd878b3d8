use dna_align::{find_longest_match, AlignError, Match, Operand, MAX_SEQUENCE_LENGTH};
use proptest::prelude::*;

/// Brute-force reference: longest length first, then earliest start in `b`,
/// then earliest start in `a`.
fn brute_longest(a: &[u8], b: &[u8]) -> Match {
    for len in (1..=a.len().min(b.len())).rev() {
        for pb in 0..=b.len() - len {
            for pa in 0..=a.len() - len {
                if a[pa..pa + len] == b[pb..pb + len] {
                    return Match::new(len, pa, pb);
                }
            }
        }
    }
    Match::NONE
}

#[test]
fn documented_example() {
    let m = find_longest_match(b"AAGTTT", b"AGTTTA").unwrap();
    assert_eq!(m.as_tuple(), (5, 1, 0));
}

#[test]
fn full_length_inputs_are_accepted() {
    let s = vec![b'A'; MAX_SEQUENCE_LENGTH];
    let m = find_longest_match(&s, &s).unwrap();
    assert_eq!(m.as_tuple(), (MAX_SEQUENCE_LENGTH, 0, 0));
}

#[test]
fn overlong_b_is_rejected() {
    let long = vec![b'C'; MAX_SEQUENCE_LENGTH + 1];
    assert_eq!(
        find_longest_match(b"", &long).unwrap_err(),
        AlignError::precondition(Operand::B, MAX_SEQUENCE_LENGTH + 1, 0, MAX_SEQUENCE_LENGTH)
    );
}

proptest! {
    #[test]
    fn bounded_by_shorter_input(a in "[ACGT]{0,40}", b in "[ACGT]{0,40}") {
        let m = find_longest_match(a.as_bytes(), b.as_bytes()).unwrap();
        prop_assert!(m.len <= a.len().min(b.len()));
    }

    #[test]
    fn identity_matches_whole_sequence(s in "[ACGT]{1,150}") {
        let m = find_longest_match(s.as_bytes(), s.as_bytes()).unwrap();
        prop_assert_eq!(m.as_tuple(), (s.len(), 0, 0));
    }

    #[test]
    fn disjoint_alphabets_have_no_match(a in "[AC]{0,30}", b in "[GT]{0,30}") {
        let m = find_longest_match(a.as_bytes(), b.as_bytes()).unwrap();
        prop_assert_eq!(m, Match::NONE);
    }

    #[test]
    fn agrees_with_brute_force(a in "[ACGT]{0,20}", b in "[ACGT]{0,20}") {
        let got = find_longest_match(a.as_bytes(), b.as_bytes()).unwrap();
        prop_assert_eq!(got, brute_longest(a.as_bytes(), b.as_bytes()));
    }

    #[test]
    fn reported_run_really_matches(a in "[ACGT]{0,30}", b in "[ACGT]{0,30}") {
        let m = find_longest_match(a.as_bytes(), b.as_bytes()).unwrap();
        prop_assert_eq!(
            &a.as_bytes()[m.pos_a..m.end_a()],
            &b.as_bytes()[m.pos_b..m.end_b()]
        );
    }
}
