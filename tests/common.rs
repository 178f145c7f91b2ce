use assert_cmd::{cargo::cargo_bin_cmd, Command};

pub fn searchlab() -> Command {
    cargo_bin_cmd!("searchlab")
}

/// Assert one report line: fixed prefix, pinned node count, and a
/// six-decimal elapsed time with the trailing unit.
#[allow(dead_code)]
pub fn assert_report_line(line: &str, prefix: &str, nodes: usize) {
    let expected = format!("{} -> Nodes Visited: {}, Execution Time: ", prefix, nodes);
    assert!(
        line.starts_with(&expected),
        "unexpected report line: {line:?}"
    );

    let elapsed = line[expected.len()..]
        .strip_suffix(" seconds")
        .unwrap_or_else(|| panic!("missing ' seconds' suffix: {line:?}"));
    let (secs, frac) = elapsed
        .split_once('.')
        .unwrap_or_else(|| panic!("missing decimal point: {line:?}"));
    assert!(secs.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(frac.len(), 6, "expected six decimal places: {line:?}");
    assert!(frac.chars().all(|c| c.is_ascii_digit()));
}
