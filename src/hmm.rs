//!
//! Discrete-symbol HMM calculation
//!
//! # Overview of calculation
//!
//! x = x[0],...,x[T-1] : Observed symbols of length T
//!
//! Forward
//! F[t][s]
//!  = P(emits x[0:t+1]=x[0],...,x[t] and ends in state s)
//! F[0][s] = P(# -> s) e_s(x[0])
//! F[t][s] = sum_{s'} F[t-1][s'] P(s' -> s) e_s(x[t])
//! P(x) = sum_s F[T-1][s]
//!
//! Viterbi
//! V[t][s]
//!  = max over state paths ending in s of P(path emits x[0:t+1])
//! V[0][s] = e_s(x[0])
//! V[t][s] = max_{s'} V[t-1][s'] P(s' -> s) e_s(x[t])
//! with backpointers B[t][s] = argmax, traced back from argmax_s V[T-1][s]
//!
//! `#` is the start marker: the source of the initial-state distribution,
//! never an emitting state.
//!
pub mod common;
pub mod forward;
pub mod mocks;
pub mod sample;
pub mod viterbi;

pub use common::{Hmm, HmmError, Observation, State, Symbol, START_STATE};
