use clap::Parser;
use seqhmm::cli;
use seqhmm::hmm::HmmError;
use std::path::PathBuf;

///
/// Discrete-symbol HMM: observation generation, Forward likelihood and
/// Viterbi decoding over plain-text probability tables.
///
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Opts {
    /// Model basename; reads `<basename>.trans` and `<basename>.emit`
    basename: PathBuf,
    /// Viterbi-decode each line of this observation file
    #[clap(long)]
    viterbi: Option<PathBuf>,
    /// Print the Forward likelihood of each line of this observation file
    #[clap(long)]
    forward: Option<PathBuf>,
    /// Generate a random observation of this length
    #[clap(long)]
    generate: Option<usize>,
    /// Seed of the random generator used by --generate
    #[clap(long, default_value = "0")]
    seed: u64,
}

fn run(opts: &Opts) -> Result<(), HmmError> {
    let mut ran = false;
    if let Some(obs_file) = &opts.viterbi {
        cli::decode(&opts.basename, obs_file)?;
        ran = true;
    }
    if let Some(obs_file) = &opts.forward {
        cli::likelihood(&opts.basename, obs_file)?;
        ran = true;
    }
    if let Some(n) = opts.generate {
        cli::generate(&opts.basename, n, opts.seed)?;
        ran = true;
    }
    if !ran {
        cli::inspect(&opts.basename)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();
    if let Err(err) = run(&opts) {
        eprintln!("seqhmm: {}", err);
        std::process::exit(1);
    }
}
