use clap::Parser;
use fcgenerator::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("fcgenerator")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_default_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.config_dir, PathBuf::from("fcgenerator"));
    assert_eq!(parsed.output_dir, PathBuf::from("."));
    assert!(parsed.mods.is_empty());
    assert!(!parsed.skip_cleanup);
    assert!(!parsed.dry_run);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--output-dir",
        "./out",
        "--mod",
        "bop",
        "--mod",
        "reg*",
        "--skip-cleanup",
        "--dry-run",
        "--verbose",
        "./configs",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.config_dir, PathBuf::from("./configs"));
    assert_eq!(parsed.output_dir, PathBuf::from("./out"));
    assert_eq!(parsed.mods, vec!["bop".to_string(), "reg*".to_string()]);
    assert!(parsed.skip_cleanup);
    assert!(parsed.dry_run);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-v", "-o", "./out", "-m", "bop"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert_eq!(parsed.output_dir, PathBuf::from("./out"));
    assert_eq!(parsed.mods, vec!["bop".to_string()]);
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["./configs", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
