//!
//! Sampling observations from the model
//!
//! The random generator is an injected capability: callers seed their own
//! `Rng` (e.g. `Xoshiro256PlusPlus::seed_from_u64`) so sampling is
//! reproducible in tests and safe to run in parallel.
//!
use super::common::{Hmm, HmmError, Observation, State, Symbol, START_STATE};
use crate::prob::Prob;
use fnv::FnvHashMap;
use rand::prelude::*;

///
/// pick randomly from the choices with its own probability.
///
/// Returns `None` when the choices are empty or all weights are zero;
/// no valid sample exists then.
///
pub fn pick_with_prob<R: Rng, T: Clone>(rng: &mut R, choices: &[(T, Prob)]) -> Option<T> {
    choices
        .choose_weighted(rng, |item| item.1.to_value())
        .ok()
        .map(|item| item.0.clone())
}

///
/// A probability row as a choice list, sorted by label so the draw sequence
/// does not depend on hash-map iteration order.
///
fn row_choices(row: Option<&FnvHashMap<String, Prob>>) -> Vec<(String, Prob)> {
    let mut choices: Vec<(String, Prob)> = match row {
        Some(row) => row.iter().map(|(k, &p)| (k.clone(), p)).collect(),
        None => Vec::new(),
    };
    choices.sort_by(|a, b| a.0.cmp(&b.0));
    choices
}

impl Hmm {
    ///
    /// Sample an n-length observation by a random walk from the start
    /// marker: draw the next state from the current transition row, then a
    /// symbol from the next state's emission row.
    ///
    pub fn generate<R: Rng>(&self, rng: &mut R, n: usize) -> Result<Observation, HmmError> {
        if self.is_empty() {
            return Err(HmmError::UninitializedModel);
        }

        let mut states: Vec<State> = Vec::with_capacity(n);
        let mut symbols: Vec<Symbol> = Vec::with_capacity(n);
        let mut current: State = START_STATE.to_string();

        for _ in 0..n {
            let next = pick_with_prob(rng, &row_choices(self.trans_row(&current)))
                .ok_or_else(|| HmmError::NoTransition(current.clone()))?;
            let symbol = pick_with_prob(rng, &row_choices(self.emit_row(&next)))
                .ok_or_else(|| HmmError::NoEmission(next.clone()))?;
            states.push(next.clone());
            symbols.push(symbol);
            current = next;
        }

        Ok(Observation::new(states, symbols))
    }
}
