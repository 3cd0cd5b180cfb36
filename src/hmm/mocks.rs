//!
//! Mock HMMs for testing
//!
use super::common::Hmm;

fn owned(triples: &[(&str, &str, f64)]) -> Vec<(String, String, f64)> {
    triples
        .iter()
        .map(|(a, b, p)| (a.to_string(), b.to_string(), *p))
        .collect()
}

///
/// 2-state consonant/vowel model with deterministic emissions
///
/// ```text
/// # -> C 0.5, V 0.5
/// C -> C 0.6, V 0.4
/// V -> C 0.3, V 0.7
/// C emits a (p=1), V emits b (p=1)
/// ```
///
pub fn mock_two_state() -> Hmm {
    Hmm::from_triples(
        &owned(&[
            ("#", "C", 0.5),
            ("#", "V", 0.5),
            ("C", "C", 0.6),
            ("C", "V", 0.4),
            ("V", "C", 0.3),
            ("V", "V", 0.7),
        ]),
        &owned(&[("C", "a", 1.0), ("V", "b", 1.0)]),
    )
}

///
/// Same chain as `mock_two_state` but with noisy emissions, so sampled
/// outputs do not determine the state path
///
pub fn mock_two_state_noisy() -> Hmm {
    Hmm::from_triples(
        &owned(&[
            ("#", "C", 0.5),
            ("#", "V", 0.5),
            ("C", "C", 0.6),
            ("C", "V", 0.4),
            ("V", "C", 0.3),
            ("V", "V", 0.7),
        ]),
        &owned(&[
            ("C", "a", 0.8),
            ("C", "b", 0.2),
            ("V", "a", 0.1),
            ("V", "b", 0.9),
        ]),
    )
}

///
/// Model whose only real state `D` has no outgoing transition row,
/// so sampling more than one step dead-ends
///
pub fn mock_dead_end() -> Hmm {
    Hmm::from_triples(
        &owned(&[("#", "D", 1.0)]),
        &owned(&[("D", "x", 1.0)]),
    )
}
