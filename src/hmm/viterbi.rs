//!
//! Viterbi algorithm definitions
//!
use super::common::{Hmm, Observation, State};
use crate::prob::Prob;

impl Hmm {
    ///
    /// Decode the most probable hidden state path for the observed symbols.
    ///
    /// Returns a path of the same length as the observation, or an empty
    /// path for a zero-length observation (and for a model with no states).
    /// Ties in max/argmax always resolve to the lowest state index, so the
    /// decoded path is reproducible even when all candidates are zero
    /// (e.g. an unseen symbol).
    ///
    pub fn viterbi(&self, obs: &Observation) -> Vec<State> {
        let n = self.n_states();
        if obs.is_empty() || n == 0 {
            return Vec::new();
        }
        let t_len = obs.len();

        // V[t][s] and backpointers B[t][s]
        let mut v: Vec<Vec<Prob>> = Vec::with_capacity(t_len);
        let mut b: Vec<Vec<usize>> = Vec::with_capacity(t_len);

        // The first step is scored by emission only. The transition from
        // the start marker is deliberately not applied here (unlike
        // forward), for compatibility with the reference behavior.
        v.push(
            self.states()
                .iter()
                .map(|s| self.emit_prob(s, &obs.symbols[0]))
                .collect(),
        );
        b.push(vec![0; n]);

        for t in 1..t_len {
            let symbol = &obs.symbols[t];
            let prev = &v[t - 1];
            let mut row = Vec::with_capacity(n);
            let mut bp_row = Vec::with_capacity(n);
            for s in self.states() {
                let e = self.emit_prob(s, symbol);
                let mut best = Prob::zero();
                let mut best_from = 0;
                for (k, s_prev) in self.states().iter().enumerate() {
                    let candidate = prev[k] * self.trans_prob(s_prev, s) * e;
                    // strict improvement keeps the first (lowest) index
                    if candidate > best {
                        best = candidate;
                        best_from = k;
                    }
                }
                row.push(best);
                bp_row.push(best_from);
            }
            v.push(row);
            b.push(bp_row);
        }

        // most probable final state, lowest index on ties
        let last = &v[t_len - 1];
        let mut final_state = 0;
        for (k, &p) in last.iter().enumerate() {
            if p > last[final_state] {
                final_state = k;
            }
        }

        // backtrace
        let mut path_indexes = vec![final_state];
        for t in (1..t_len).rev() {
            let prev = b[t][path_indexes[0]];
            path_indexes.insert(0, prev);
        }

        path_indexes
            .into_iter()
            .map(|k| self.states()[k].clone())
            .collect()
    }
}
