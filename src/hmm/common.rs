//!
//! Model store definitions
//!
//! `Hmm` owns the transition/emission probability tables and the derived
//! state index. It is populated once (by `io::table::load_model` or
//! `Hmm::from_triples`) and read-only afterwards, so concurrent inference
//! calls on the same model need no locking.
//!
use crate::prob::{p, Prob};
use fnv::FnvHashMap;
use std::path::PathBuf;
use thiserror::Error;

/// A hidden state label (e.g. a part-of-speech tag)
pub type State = String;

/// An observed output token
pub type Symbol = String;

/// The start marker: pseudo-state before the first observation.
///
/// It is a valid transition source (the initial-state distribution) but
/// never emits and never appears in the state index.
pub const START_STATE: &str = "#";

///
/// Errors of model loading and sampling
///
/// Zero-length observations are not errors: `forward`/`viterbi` return
/// documented empty results for them instead.
///
#[derive(Debug, Error)]
pub enum HmmError {
    /// a `.trans`/`.emit` resource is missing or unreadable
    #[error("model resource not found: {path}")]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// a probability field of a 3-field record cannot be parsed as f64
    #[error("malformed probability {field:?} at {path}:{line}")]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        field: String,
    },
    /// sampling was attempted before any table was loaded
    #[error("model has empty transition or emission tables")]
    UninitializedModel,
    /// sampling hit a state whose transition row is empty or all-zero
    #[error("state {0:?} has no transition with positive probability")]
    NoTransition(State),
    /// sampling hit a state whose emission row is empty or all-zero
    #[error("state {0:?} has no emission with positive probability")]
    NoEmission(State),
}

type Row = FnvHashMap<String, Prob>;

///
/// HMM model store
///
/// * `transitions[from][to]` = P(next state = to | current state = from)
/// * `emissions[state][symbol]` = P(emits symbol | state)
/// * `states` = all real states (start marker excluded) in lexicographic
///   order; dynamic-programming matrices are addressed by this order
///
#[derive(Debug, Clone, Default)]
pub struct Hmm {
    transitions: FnvHashMap<State, Row>,
    emissions: FnvHashMap<State, Row>,
    states: Vec<State>,
    index: FnvHashMap<State, usize>,
}

impl Hmm {
    ///
    /// Create a model with empty tables. Inference on it is degenerate and
    /// sampling fails with `UninitializedModel`.
    ///
    pub fn new() -> Hmm {
        Hmm::default()
    }
    ///
    /// Build a model from `(from, to, prob)` transition triples and
    /// `(state, symbol, prob)` emission triples.
    ///
    /// The state index is derived from the transition source states (start
    /// marker excluded) sorted lexicographically. The sort gives the index a
    /// total order that does not depend on the order triples arrive in.
    ///
    pub fn from_triples(transitions: &[(String, String, f64)], emissions: &[(String, String, f64)]) -> Hmm {
        let mut trans: FnvHashMap<State, Row> = FnvHashMap::default();
        for (from, to, prob) in transitions {
            trans
                .entry(from.clone())
                .or_insert_with(FnvHashMap::default)
                .insert(to.clone(), p(*prob));
        }
        let mut emit: FnvHashMap<State, Row> = FnvHashMap::default();
        for (state, symbol, prob) in emissions {
            emit.entry(state.clone())
                .or_insert_with(FnvHashMap::default)
                .insert(symbol.clone(), p(*prob));
        }

        let mut states: Vec<State> = trans.keys().filter(|s| *s != START_STATE).cloned().collect();
        states.sort();
        let index = states
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), i))
            .collect();

        Hmm {
            transitions: trans,
            emissions: emit,
            states,
            index,
        }
    }
    ///
    /// P(from -> to). Absent entries are zero-probability events, not
    /// errors.
    ///
    pub fn trans_prob(&self, from: &str, to: &str) -> Prob {
        self.transitions
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or_else(Prob::zero)
    }
    ///
    /// P(state emits symbol). Absent entries (including symbols never seen
    /// in the tables) are zero.
    ///
    pub fn emit_prob(&self, state: &str, symbol: &str) -> Prob {
        self.emissions
            .get(state)
            .and_then(|row| row.get(symbol))
            .copied()
            .unwrap_or_else(Prob::zero)
    }
    ///
    /// All real states in index order (start marker excluded)
    ///
    pub fn states(&self) -> &[State] {
        &self.states
    }
    ///
    /// N = the number of real states
    ///
    pub fn n_states(&self) -> usize {
        self.states.len()
    }
    ///
    /// Dense index of a real state in `[0, N)`
    ///
    pub fn state_index(&self, state: &str) -> Option<usize> {
        self.index.get(state).copied()
    }
    ///
    /// True if either table is empty (nothing was loaded)
    ///
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty() || self.emissions.is_empty()
    }
    ///
    /// The outgoing transition row of a state, if any
    ///
    pub(crate) fn trans_row(&self, from: &str) -> Option<&FnvHashMap<State, Prob>> {
        self.transitions.get(from)
    }
    ///
    /// The emission row of a state, if any
    ///
    pub(crate) fn emit_row(&self, state: &str) -> Option<&FnvHashMap<Symbol, Prob>> {
        self.emissions.get(state)
    }
}

///
/// An observation: parallel state and symbol sequences of equal length.
///
/// States may be placeholder empty strings when the true path is unknown
/// (e.g. observations read from a decode input file).
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub states: Vec<State>,
    pub symbols: Vec<Symbol>,
}

impl Observation {
    pub fn new(states: Vec<State>, symbols: Vec<Symbol>) -> Observation {
        assert_eq!(states.len(), symbols.len());
        Observation { states, symbols }
    }
    ///
    /// Observation with unknown states (placeholder empty strings)
    ///
    pub fn from_symbols(symbols: Vec<Symbol>) -> Observation {
        let states = vec![String::new(); symbols.len()];
        Observation { states, symbols }
    }
    ///
    /// T = the number of time steps
    ///
    pub fn len(&self) -> usize {
        self.symbols.len()
    }
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// state sequence on the first line, output sequence on the second
impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", self.states.join(" "))?;
        writeln!(f, "{}", self.symbols.join(" "))
    }
}
