pub mod cli;
pub mod hmm;
pub mod io;
pub mod prob;

#[macro_use]
extern crate approx;
