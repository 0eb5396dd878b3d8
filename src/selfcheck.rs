//! Built-in example table, run by the `test` subcommand of `dna-align`.
//!
//! The cases pin the exact tie-breaking of both aligners. A failing case is
//! reported with its inputs and both values instead of aborting the run.

use std::fmt;

use crate::align::anchor::align;
use crate::align::lccs::find_longest_match;
use crate::align::lcs::lcs_align;

/// `(a, b) -> (len, pos_a, pos_b)`
pub const LONGEST_MATCH_CASES: &[(&str, &str, (usize, usize, usize))] = &[
    ("AAGTTT", "AACTTT", (3, 3, 3)),
    ("AAGTTT", "AATTTC", (3, 3, 2)),
    ("AAGTTT", "AACCTT", (2, 0, 0)),
    ("AAGTTT", "CAATTT", (3, 3, 3)),
    ("AAGTTT", "AATTGG", (2, 0, 0)),
    ("AAGTTT", "AGTTTA", (5, 1, 0)),
    ("", "", (0, 0, 0)),
    ("", "A", (0, 0, 0)),
    ("A", "", (0, 0, 0)),
    ("A", "A", (1, 0, 0)),
    ("A", "G", (0, 0, 0)),
    ("A", "GA", (1, 0, 1)),
    ("A", "AG", (1, 0, 0)),
    ("GA", "A", (1, 1, 0)),
    ("AG", "A", (1, 0, 0)),
    ("AAAGGG", "AAG", (3, 1, 0)),
    ("AAAGGG", "GA", (1, 3, 0)),
    ("AAACGGG", "AG", (1, 0, 0)),
    ("GAATTCAGTTA", "GGATCGA", (2, 0, 1)),
    ("GATCACTAGCAGCAGT", "GACTAGGAGTACACCC", (5, 4, 1)),
    ("GATCACTAGCAGCAGT", "GATCACTAGCAGCAGT", (16, 0, 0)),
    ("GATCACTATTTTTTTT", "GTTTTTTTGATCACTA", (8, 0, 8)),
    ("GATCACTATTTTTTTT", "TTTTTTTTGATCACTA", (8, 8, 0)),
];

/// `(standard, query) -> aligned query`
pub const ANCHOR_CASES: &[(&str, &str, &str)] = &[
    ("AAGTTT", "AACTTT", "AACTTT"),
    ("AAGTTT", "AATTTC", "AA-TTTC"),
    ("AAGTTT", "AACCTT", "AACCTT"),
    ("AAGTTT", "CAATTT", "CAATTT"),
    ("AAGTTT", "AATTGG", "AA-TTGG"),
    ("AAGTTT", "AGTTTA", "-AGTTTA"),
    ("A", "A", "A"),
    ("A", "G", "G"),
    ("A", "GA", "GA"),
    ("A", "AG", "AG"),
    ("GA", "A", "-A"),
    ("AG", "A", "A"),
    ("AAAGGG", "AAG", "-AAG"),
    ("AAAGGG", "GA", "---GA"),
    ("AAACGGG", "AG", "A---G"),
    ("GAATTCAGTTA", "GGATCGA", "GGA-TCGA"),
    ("GATCACTAGCAGCAGT", "GACTAGGAGTACACCC", "G---ACTAGG---AGTACACCC"),
    ("GATCACTAGCAGCAGT", "GATCACTAGCAGCAGT", "GATCACTAGCAGCAGT"),
    ("GATCACTATTTTTTTT", "GTTTTTTTGATCACTA", "GTTTTTTTGATCACTA"),
    ("GATCACTATTTTTTTT", "TTTTTTTTGATCACTA", "--------TTTTTTTTGATCACTA"),
];

/// `(a, b) -> (aligned a, aligned b)`
pub const LCS_CASES: &[(&str, &str, (&str, &str))] = &[
    ("A", "GA", ("_A", "GA")),
    ("A", "A", ("A", "A")),
    (
        "GATCACTAGCAGCAGT",
        "GACTAGGAGTACACCC",
        ("GATCACTA_GCAG__CA___GT", "G___ACTAGG_AGTACACCC__"),
    ),
];

/// One case whose actual value differed from the expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailure {
    pub check: &'static str,
    pub params: String,
    pub actual: String,
    pub expected: String,
}

impl fmt::Display for CaseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: param: {}, actual: {}, expected: {}",
            self.check, self.params, self.actual, self.expected
        )
    }
}

/// Outcome of [`run`].
#[derive(Debug, Clone, Default)]
pub struct SelfCheckReport {
    pub passed: usize,
    pub failures: Vec<CaseFailure>,
}

impl SelfCheckReport {
    pub fn total(&self) -> usize {
        self.passed + self.failures.len()
    }

    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, check: &'static str, params: String, actual: String, expected: String) {
        if actual == expected {
            self.passed += 1;
        } else {
            self.failures.push(CaseFailure {
                check,
                params,
                actual,
                expected,
            });
        }
    }
}

/// Run every built-in case, calling `on_case` after each one.
pub fn run_with(mut on_case: impl FnMut(&SelfCheckReport)) -> SelfCheckReport {
    let mut report = SelfCheckReport::default();

    for &(a, b, expected) in LONGEST_MATCH_CASES {
        let actual = match find_longest_match(a.as_bytes(), b.as_bytes()) {
            Ok(m) => format!("{:?}", m.as_tuple()),
            Err(e) => e.to_string(),
        };
        report.record(
            "find_longest_match",
            format!("({a:?}, {b:?})"),
            actual,
            format!("{expected:?}"),
        );
        on_case(&report);
    }

    for &(standard, query, expected) in ANCHOR_CASES {
        let actual = match align(standard.as_bytes(), query.as_bytes()) {
            Ok(out) => String::from_utf8_lossy(&out).into_owned(),
            Err(e) => e.to_string(),
        };
        report.record(
            "align",
            format!("({standard:?}, {query:?})"),
            actual,
            expected.to_string(),
        );
        on_case(&report);
    }

    for &(a, b, (exp_a, exp_b)) in LCS_CASES {
        let actual = match lcs_align(a.as_bytes(), b.as_bytes()) {
            Ok(aln) => format!(
                "({}, {})",
                String::from_utf8_lossy(&aln.aligned_a),
                String::from_utf8_lossy(&aln.aligned_b)
            ),
            Err(e) => e.to_string(),
        };
        report.record(
            "lcs_align",
            format!("({a:?}, {b:?})"),
            actual,
            format!("({exp_a}, {exp_b})"),
        );
        on_case(&report);
    }

    report
}

/// Run every built-in case.
pub fn run() -> SelfCheckReport {
    run_with(|_| {})
}
