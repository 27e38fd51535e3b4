use clap::Parser;
use tsf_cli::{Args, Command};

#[test]
fn parses_every_command() {
    let args = Args::try_parse_from(["tsf", "inspect", "a.tsf"]).unwrap();
    assert!(matches!(args.command, Command::Inspect { .. }));

    let args = Args::try_parse_from(["tsf", "dump", "a.tsf", "--pretty"]).unwrap();
    assert!(matches!(args.command, Command::Dump { pretty: true, .. }));

    let args = Args::try_parse_from(["tsf", "pack", "a.json", "a.tsf"]).unwrap();
    assert!(matches!(args.command, Command::Pack { .. }));

    let args = Args::try_parse_from(["tsf", "to-base64", "a.tsf"]).unwrap();
    assert!(matches!(args.command, Command::ToBase64 { .. }));

    let args = Args::try_parse_from(["tsf", "from-base64", "AQAA", "a.tsf"]).unwrap();
    assert!(matches!(args.command, Command::FromBase64 { .. }));
}

#[test]
fn max_elements_flag_reaches_codec() {
    let args =
        Args::try_parse_from(["tsf", "inspect", "a.tsf", "--max-elements", "10"]).unwrap();
    assert_eq!(args.max_elements, Some(10));
    assert_eq!(args.codec().options().max_elements, 10);
}

#[test]
fn missing_arguments_are_rejected() {
    assert!(Args::try_parse_from(["tsf", "pack", "a.json"]).is_err());
    assert!(Args::try_parse_from(["tsf"]).is_err());
}

#[test]
fn run_reports_decode_errors() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("short.tsf");
    std::fs::write(&file, [1, 0, 0, 0, 5]).unwrap();

    let args = Args::try_parse_from(["tsf", "dump", file.to_str().unwrap()]).unwrap();
    let err = tsf_cli::run(&args).unwrap_err();
    assert!(err.to_string().contains("truncated"), "{}", err);
}

#[test]
fn unparsable_env_limit_falls_back_like_the_library() {
    std::env::set_var(tsf_codec::MAX_ELEMENTS_ENV, "lots");
    let args = Args::try_parse_from(["tsf", "inspect", "a.tsf"]).unwrap();
    assert_eq!(args.max_elements, None);
    assert_eq!(
        args.codec().options().max_elements,
        tsf_codec::DEFAULT_MAX_ELEMENTS
    );

    let args =
        Args::try_parse_from(["tsf", "inspect", "a.tsf", "--max-elements", "4"]).unwrap();
    assert_eq!(args.codec().options().max_elements, 4);
    std::env::remove_var(tsf_codec::MAX_ELEMENTS_ENV);
}

#[test]
fn unparsable_flag_limit_is_an_error() {
    let parsed = Args::try_parse_from(["tsf", "inspect", "a.tsf", "--max-elements", "lots"]);
    assert!(parsed.is_err());
}
