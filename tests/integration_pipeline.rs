//! Integration tests for the recovery pipeline.
//!
//! These tests verify end-to-end behavior against real digest files:
//! - the documented enumeration and result ordering
//! - worker-count invariance
//! - degenerate (length 0) and duplicate-alphabet spaces
//! - fatal handling of a missing digest file

use assert_fs::prelude::*;
use hashsmash::core::hasher::{CandidateHasher, Md5Hasher};
use hashsmash::core::pipeline::Pipeline;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Write a digest file containing the MD5 of each given candidate.
fn digest_file(candidates: &[&str]) -> NamedTempFile {
    let hasher = Md5Hasher::new();
    let mut file = NamedTempFile::new().unwrap();
    for candidate in candidates {
        writeln!(file, "{}", hasher.digest_hex(candidate)).unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn recovers_matches_in_enumeration_order() {
    // alphabet "ab", length 2 enumerates aa, ab, ba, bb; non-matches drop
    let hashes = digest_file(&["bb", "aa"]);

    let result = Pipeline::builder()
        .alphabet("ab".parse().unwrap())
        .length(2)
        .targets_path(hashes.path())
        .build()
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(result.matches, ["aa", "bb"]);
    assert_eq!(result.candidates_checked, 4);
    assert_eq!(result.targets, 2);
}

#[test]
fn length_zero_checks_only_the_prefix() {
    let hashes = digest_file(&["x"]);

    let result = Pipeline::builder()
        .alphabet("ab".parse().unwrap())
        .length(0)
        .prefix("x")
        .targets_path(hashes.path())
        .build()
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(result.matches, ["x"]);
    assert_eq!(result.candidates_checked, 1);
}

#[test]
fn length_zero_with_empty_digest_file_matches_nothing() {
    let hashes = digest_file(&[]);

    let result = Pipeline::builder()
        .alphabet("ab".parse().unwrap())
        .length(0)
        .prefix("x")
        .targets_path(hashes.path())
        .build()
        .unwrap()
        .run()
        .unwrap();

    assert!(result.matches.is_empty());
}

#[test]
fn empty_digest_set_still_performs_the_full_search() {
    let hashes = digest_file(&[]);

    let result = Pipeline::builder()
        .alphabet("abc".parse().unwrap())
        .length(3)
        .targets_path(hashes.path())
        .build()
        .unwrap()
        .run()
        .unwrap();

    assert!(result.matches.is_empty());
    // every candidate in range was still checked
    assert_eq!(result.candidates_checked, 27);
}

#[test]
fn result_is_invariant_under_worker_count() {
    let hashes = digest_file(&["ca", "ab", "cc"]);

    let run_with_cores = |cores: usize| {
        Pipeline::builder()
            .alphabet("abc".parse().unwrap())
            .length(2)
            .cores(cores)
            .targets_path(hashes.path())
            .build()
            .unwrap()
            .run()
            .unwrap()
    };

    let serial = run_with_cores(1);
    let parallel = run_with_cores(4);

    assert_eq!(serial.matches, parallel.matches);
    assert_eq!(serial.candidates_checked, parallel.candidates_checked);
    assert_eq!(serial.matches, ["ab", "ca", "cc"]);
}

#[test]
fn duplicate_alphabet_characters_produce_duplicate_matches() {
    let hashes = digest_file(&["a"]);

    let result = Pipeline::builder()
        .alphabet("aa".parse().unwrap())
        .length(1)
        .targets_path(hashes.path())
        .build()
        .unwrap()
        .run()
        .unwrap();

    // two enumeration branches, both matching
    assert_eq!(result.matches, ["a", "a"]);
}

#[test]
fn prefix_is_applied_to_every_candidate() {
    let hashes = digest_file(&["pwb"]);

    let result = Pipeline::builder()
        .alphabet("ab".parse().unwrap())
        .length(1)
        .prefix("pw")
        .targets_path(hashes.path())
        .build()
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(result.matches, ["pwb"]);
}

#[test]
fn missing_digest_file_is_a_fatal_error() {
    let result = Pipeline::builder()
        .targets_path("/nonexistent/hashes-integration.txt")
        .build()
        .unwrap()
        .run();

    let error = result.unwrap_err();
    assert!(predicate::str::contains("/nonexistent/hashes-integration.txt")
        .eval(&error.to_string()));
}

#[test]
fn digest_file_lines_are_trimmed_and_deduplicated() {
    let hasher = Md5Hasher::new();
    let temp = assert_fs::TempDir::new().unwrap();
    let hashes = temp.child("hashes.txt");
    let digest = hasher.digest_hex("ab");
    // trailing whitespace, a duplicate line, and a blank line
    hashes
        .write_str(&format!("{}  \n{}\n\n", digest, digest))
        .unwrap();

    let result = Pipeline::builder()
        .alphabet("ab".parse().unwrap())
        .length(2)
        .targets_path(hashes.path())
        .build()
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(result.targets, 1);
    assert_eq!(result.matches, ["ab"]);

    temp.close().unwrap();
}
