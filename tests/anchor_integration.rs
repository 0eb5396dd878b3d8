use dna_align::{align, selfcheck::ANCHOR_CASES, utils::strip_gaps, ANCHOR_GAP};
use proptest::prelude::*;

#[test]
fn example_table() {
    for &(standard, query, expected) in ANCHOR_CASES {
        let got = align(standard.as_bytes(), query.as_bytes()).unwrap();
        assert_eq!(
            String::from_utf8(got).unwrap(),
            expected,
            "standard={standard} query={query}"
        );
    }
}

#[test]
fn documented_scenarios() {
    assert_eq!(align(b"AAGTTT", b"AATTTC").unwrap(), b"AA-TTTC");
    assert_eq!(
        align(b"GATCACTATTTTTTTT", b"TTTTTTTTGATCACTA").unwrap(),
        b"--------TTTTTTTTGATCACTA"
    );
}

#[test]
fn overlong_query_fails_without_output() {
    let long = vec![b'A'; 151];
    assert!(align(b"A", &long).unwrap_err().is_precondition());
}

proptest! {
    #[test]
    fn never_shorter_than_query(s in "[ACGT]{0,60}", q in "[ACGT]{0,60}") {
        let out = align(s.as_bytes(), q.as_bytes()).unwrap();
        prop_assert!(out.len() >= q.len());
    }

    #[test]
    fn only_inserts_gaps(s in "[ACGT]{0,60}", q in "[ACGT]{0,60}") {
        let out = align(s.as_bytes(), q.as_bytes()).unwrap();
        prop_assert_eq!(strip_gaps(&out, ANCHOR_GAP), q.as_bytes().to_vec());
    }

    #[test]
    fn disjoint_query_is_untouched(s in "[AC]{0,30}", q in "[GT]{0,30}") {
        let out = align(s.as_bytes(), q.as_bytes()).unwrap();
        prop_assert_eq!(out, q.as_bytes().to_vec());
    }

    #[test]
    fn self_alignment_is_identity(s in "[ACGT]{1,150}") {
        let out = align(s.as_bytes(), s.as_bytes()).unwrap();
        prop_assert_eq!(out, s.as_bytes().to_vec());
    }
}
