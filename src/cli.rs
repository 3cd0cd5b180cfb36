//!
//! Thin command layer over the core: load a model, run an operation,
//! print results. Error reporting belongs to the binary, the core only
//! returns `HmmError`.
//!
use crate::hmm::{Hmm, HmmError, Observation};
use crate::io::table::load_model;
use crate::prob::Prob;
use itertools::Itertools;
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

///
/// Read a batch observation file: one observation per line,
/// whitespace-separated symbols. An empty line is a zero-length
/// observation (decoded to an empty path, not an error).
///
pub fn read_observations(path: &Path) -> Result<Vec<Observation>, HmmError> {
    let file = File::open(path).map_err(|source| HmmError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let mut observations = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| HmmError::ResourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let symbols: Vec<String> = line.split_whitespace().map(|s| s.to_string()).collect();
        observations.push(Observation::from_symbols(symbols));
    }
    Ok(observations)
}

///
/// Viterbi-decode every line of `obs_file`, printing one space-joined
/// state path per line.
///
pub fn decode(basename: &Path, obs_file: &Path) -> Result<(), HmmError> {
    let hmm = load_model(basename)?;
    info!("loaded model with {} states", hmm.n_states());
    for obs in read_observations(obs_file)? {
        let path = hmm.viterbi(&obs);
        println!("{}", path.iter().join(" "));
    }
    Ok(())
}

///
/// Forward-likelihood of every line of `obs_file`, printed as
/// `index <tab> log prob <tab> prob`, followed by the product over lines.
///
pub fn likelihood(basename: &Path, obs_file: &Path) -> Result<(), HmmError> {
    let hmm = load_model(basename)?;
    let mut ps: Vec<Prob> = Vec::new();
    for (i, obs) in read_observations(obs_file)?.iter().enumerate() {
        let r = hmm.forward(obs);
        println!("{}\t{}\t{}", i, r.full_prob.to_log_value(), r.full_prob.to_value());
        ps.push(r.full_prob);
    }
    let p_total: Prob = ps.iter().product();
    println!("#total\t{}", p_total.to_log_value());
    Ok(())
}

///
/// Sample an n-length observation with the given seed and print it
/// (state sequence line, then symbol sequence line).
///
pub fn generate(basename: &Path, n: usize, seed: u64) -> Result<(), HmmError> {
    use rand::SeedableRng;
    let hmm = load_model(basename)?;
    let mut rng = rand_xoshiro::Xoshiro256PlusPlus::seed_from_u64(seed);
    let obs = hmm.generate(&mut rng, n)?;
    print!("{}", obs);
    Ok(())
}

///
/// Load and report basic model shape. Used when no operation flag is
/// given, so a bare invocation still validates the resources.
///
pub fn inspect(basename: &Path) -> Result<Hmm, HmmError> {
    let hmm = load_model(basename)?;
    println!("states\t{}", hmm.states().iter().join(" "));
    Ok(hmm)
}
