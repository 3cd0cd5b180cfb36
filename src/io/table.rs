//!
//! Loader of plain-text probability tables
//!
//! A model `basename` names two resources:
//!
//! * `basename.trans`: lines of `fromState toState probability`
//! * `basename.emit`: lines of `state symbol probability`
//!
//! Fields are whitespace-separated. Lines that do not have exactly 3
//! fields are ignored; a 3-field line whose probability is not numeric is
//! a `MalformedRecord` error.
//!
use crate::hmm::{Hmm, HmmError};
use log::trace;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

///
/// Parse one table resource into `(first, second, probability)` triples.
///
pub fn parse_triples(path: &Path) -> Result<Vec<(String, String, f64)>, HmmError> {
    let file = File::open(path).map_err(|source| HmmError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut triples = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| HmmError::ResourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            if !fields.is_empty() {
                trace!("skipping non-triple line {}:{}", path.display(), i + 1);
            }
            continue;
        }
        let prob: f64 = fields[2].parse().map_err(|_| HmmError::MalformedRecord {
            path: path.to_path_buf(),
            line: i + 1,
            field: fields[2].to_string(),
        })?;
        triples.push((fields[0].to_string(), fields[1].to_string(), prob));
    }
    Ok(triples)
}

///
/// Load a model from `<basename>.trans` and `<basename>.emit`.
///
/// Idempotent: loading the same basename twice produces equal tables and
/// the same lexicographic state index.
///
pub fn load_model(basename: &Path) -> Result<Hmm, HmmError> {
    let transitions = parse_triples(&with_extension(basename, "trans"))?;
    let emissions = parse_triples(&with_extension(basename, "emit"))?;
    Ok(Hmm::from_triples(&transitions, &emissions))
}

/// `basename.trans`-style paths; appends rather than replaces, so a
/// basename containing dots (`my.model`) keeps its stem
fn with_extension(basename: &Path, ext: &str) -> PathBuf {
    let mut s = basename.as_os_str().to_os_string();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use test_case::test_case;

    fn write_model(dir: &TempDir, name: &str, trans: &str, emit: &str) -> PathBuf {
        let basename = dir.path().join(name);
        let mut f = File::create(with_extension(&basename, "trans")).unwrap();
        write!(f, "{}", trans).unwrap();
        let mut f = File::create(with_extension(&basename, "emit")).unwrap();
        write!(f, "{}", emit).unwrap();
        basename
    }

    const TRANS: &str = "# C 0.5\n# V 0.5\nC C 0.6\nC V 0.4\nV C 0.3\nV V 0.7\n";
    const EMIT: &str = "C a 1.0\nV b 1.0\n";

    #[test]
    fn load_two_state_model() {
        let dir = TempDir::new().unwrap();
        let basename = write_model(&dir, "two_state", TRANS, EMIT);
        let hmm = load_model(&basename).unwrap();
        assert_eq!(hmm.states(), &["C".to_string(), "V".to_string()]);
        assert_abs_diff_eq!(hmm.trans_prob("#", "C").to_value(), 0.5);
        assert_abs_diff_eq!(hmm.trans_prob("V", "V").to_value(), 0.7);
        assert_abs_diff_eq!(hmm.emit_prob("V", "b").to_value(), 1.0);
    }
    #[test]
    fn load_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let basename = write_model(&dir, "two_state", TRANS, EMIT);
        let a = load_model(&basename).unwrap();
        let b = load_model(&basename).unwrap();
        assert_eq!(a.states(), b.states());
        for s in a.states() {
            for t in a.states() {
                assert_eq!(a.trans_prob(s, t), b.trans_prob(s, t));
            }
            assert_eq!(a.emit_prob(s, "a"), b.emit_prob(s, "a"));
            assert_eq!(a.emit_prob(s, "b"), b.emit_prob(s, "b"));
        }
    }
    // lines without exactly 3 fields are ignored, not errors
    #[test_case("\n# C 1.0\nC C 1.0\n" ; "leading blank line")]
    #[test_case("# C 1.0\njunk\nC C 1.0\n" ; "one field")]
    #[test_case("# C 1.0\na b 0.5 extra\nC C 1.0\n" ; "four fields")]
    fn load_skips_non_triple_lines(trans: &str) {
        let dir = TempDir::new().unwrap();
        let basename = write_model(&dir, "m", trans, "C x 1.0\n");
        let hmm = load_model(&basename).unwrap();
        assert_eq!(hmm.states(), &["C".to_string()]);
        assert_abs_diff_eq!(hmm.trans_prob("#", "C").to_value(), 1.0);
    }
    #[test]
    fn load_missing_resource() {
        let dir = TempDir::new().unwrap();
        let basename = dir.path().join("nothing_here");
        match load_model(&basename) {
            Err(HmmError::ResourceNotFound { path, .. }) => {
                assert_eq!(path, with_extension(&basename, "trans"));
            }
            other => panic!("expected ResourceNotFound, got {:?}", other),
        }
    }
    #[test]
    fn load_malformed_probability() {
        let dir = TempDir::new().unwrap();
        let basename = write_model(&dir, "bad", "# C notanumber\n", "C x 1.0\n");
        match load_model(&basename) {
            Err(HmmError::MalformedRecord { line, field, .. }) => {
                assert_eq!(line, 1);
                assert_eq!(field, "notanumber");
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }
}
