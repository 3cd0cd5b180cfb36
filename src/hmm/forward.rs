//!
//! Forward algorithm definitions
//!
use super::common::{Hmm, Observation, START_STATE};
use crate::prob::Prob;

///
/// Result of the Forward algorithm
///
/// `tables[t][s]` = P(emits `x[0],...,x[t]` and ends in the state with
/// index `s`), one row per time step (T×N).
///
#[derive(Debug, Clone)]
pub struct ForwardResult {
    pub tables: Vec<Vec<Prob>>,
    /// total probability of the observed symbols, summed over all hidden
    /// state paths
    pub full_prob: Prob,
}

impl ForwardResult {
    /// The number of time steps this result stores.
    pub fn n_steps(&self) -> usize {
        self.tables.len()
    }
}

impl Hmm {
    ///
    /// Run the Forward algorithm on the observed symbols.
    ///
    /// A zero-length observation yields no tables and `full_prob` zero:
    /// no evidence means no likelihood, not the vacuous 1. Callers that
    /// need a probability must treat T=0 as a degenerate case.
    ///
    pub fn forward(&self, obs: &Observation) -> ForwardResult {
        if obs.is_empty() || self.n_states() == 0 {
            return ForwardResult {
                tables: Vec::new(),
                full_prob: Prob::zero(),
            };
        }

        let mut tables: Vec<Vec<Prob>> = Vec::with_capacity(obs.len());
        tables.push(self.f_init(&obs.symbols[0]));
        for symbol in &obs.symbols[1..] {
            let table = self.f_step(tables.last().unwrap(), symbol);
            tables.push(table);
        }

        let full_prob = tables.last().unwrap().iter().sum();
        ForwardResult { tables, full_prob }
    }
    ///
    /// First row: `F[0][s] = P(# -> s) e_s(x[0])`
    ///
    fn f_init(&self, symbol: &str) -> Vec<Prob> {
        self.states()
            .iter()
            .map(|s| self.trans_prob(START_STATE, s) * self.emit_prob(s, symbol))
            .collect()
    }
    ///
    /// One recurrence step: `F[t][s] = sum_{s'} F[t-1][s'] P(s' -> s) e_s(x[t])`
    ///
    /// The start marker is excluded from predecessors after t=0.
    ///
    fn f_step(&self, prev: &[Prob], symbol: &str) -> Vec<Prob> {
        self.states()
            .iter()
            .map(|s| {
                let from_prev: Prob = self
                    .states()
                    .iter()
                    .zip(prev)
                    .map(|(s_prev, &f)| f * self.trans_prob(s_prev, s))
                    .sum();
                from_prev * self.emit_prob(s, symbol)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hmm::mocks::{mock_two_state, mock_two_state_noisy};
    use crate::hmm::Hmm;

    fn obs(symbols: &[&str]) -> Observation {
        Observation::from_symbols(symbols.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn forward_two_state_aba() {
        let hmm = mock_two_state();
        let r = hmm.forward(&obs(&["a", "b", "a"]));
        assert_eq!(r.n_steps(), 3);
        // only the path C,V,C is compatible with the emissions:
        // 0.5*1.0 * 0.4*1.0 * 0.3*1.0 = 0.06
        assert_abs_diff_eq!(r.full_prob.to_value(), 0.06, epsilon = 1e-12);
        // F[0] = [0.5*1, 0.5*0]
        assert_abs_diff_eq!(r.tables[0][0].to_value(), 0.5, epsilon = 1e-12);
        assert!(r.tables[0][1].is_zero());
        // F[1] = [0, 0.2], F[2] = [0.06, 0]
        assert!(r.tables[1][0].is_zero());
        assert_abs_diff_eq!(r.tables[1][1].to_value(), 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(r.tables[2][0].to_value(), 0.06, epsilon = 1e-12);
        assert!(r.tables[2][1].is_zero());
    }
    #[test]
    fn forward_unseen_symbol_is_zero() {
        let hmm = mock_two_state();
        let r = hmm.forward(&obs(&["a", "z"]));
        assert_eq!(r.n_steps(), 2);
        assert!(r.full_prob.is_zero());
        // the zero propagates: every state at t=1 is unreachable
        assert!(r.tables[1].iter().all(|p| p.is_zero()));
    }
    #[test]
    fn forward_empty_observation() {
        let hmm = mock_two_state();
        let r = hmm.forward(&obs(&[]));
        assert_eq!(r.n_steps(), 0);
        assert!(r.full_prob.is_zero());
    }
    #[test]
    fn forward_empty_model() {
        let hmm = Hmm::new();
        let r = hmm.forward(&obs(&["a"]));
        assert_eq!(r.n_steps(), 0);
        assert!(r.full_prob.is_zero());
    }
    #[test]
    fn forward_noisy_total_at_most_one() {
        let hmm = mock_two_state_noisy();
        for symbols in [
            vec!["a"],
            vec!["b", "b"],
            vec!["a", "b", "a", "b"],
            vec!["b", "a", "a", "a", "b", "b"],
        ]
        .iter()
        {
            let o = Observation::from_symbols(symbols.iter().map(|s| s.to_string()).collect());
            let p = hmm.forward(&o).full_prob.to_value();
            assert!(p > 0.0);
            assert!(p <= 1.0 + 1e-12);
        }
    }
    #[test]
    fn forward_single_step_sums_initial_distribution() {
        // for T=1 the total is sum_s P(#->s) e_s(x0)
        let hmm = mock_two_state_noisy();
        let r = hmm.forward(&obs(&["a"]));
        assert_abs_diff_eq!(
            r.full_prob.to_value(),
            0.5 * 0.8 + 0.5 * 0.1,
            epsilon = 1e-12
        );
    }
}
