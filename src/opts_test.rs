use crate::Opts;
use crate::error::Error;
use crate::opts::UnknownCodePolicy;

#[test]
fn default_opts() {
    let opts = Opts::default();
    assert_eq!(opts.unknown_result_codes, UnknownCodePolicy::Preserve);
    assert_eq!(UnknownCodePolicy::default(), UnknownCodePolicy::Preserve);
}

#[test]
fn parse_policy() {
    assert_eq!(
        "preserve".parse::<UnknownCodePolicy>().unwrap(),
        UnknownCodePolicy::Preserve
    );
    assert_eq!(
        "reject".parse::<UnknownCodePolicy>().unwrap(),
        UnknownCodePolicy::Reject
    );
}

#[test]
fn parse_policy_ignores_case_and_whitespace() {
    assert_eq!(
        " Reject\n".parse::<UnknownCodePolicy>().unwrap(),
        UnknownCodePolicy::Reject
    );
}

#[test]
fn parse_policy_invalid() {
    let err = "coerce".parse::<UnknownCodePolicy>().unwrap_err();
    assert!(matches!(&err, Error::BadConfigError(msg) if msg.contains("'coerce'")));
    assert!(!err.is_fatal());
}
