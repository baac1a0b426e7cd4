// ABOUTME: Integration tests for proxy build-argument augmentation.
// ABOUTME: Covers snapshot lookup order, duplicate suppression, and process capture.

use republish::engine::{EnvSnapshot, augment_proxy_args};

const ALL_PROXY_VARS: [&str; 6] = [
    "http_proxy",
    "HTTP_PROXY",
    "https_proxy",
    "HTTPS_PROXY",
    "no_proxy",
    "NO_PROXY",
];

#[test]
fn upper_case_proxy_adds_both_cases_in_order() {
    let env = EnvSnapshot::from_pairs([("HTTP_PROXY", "foo")]);
    let mut args = vec![];

    augment_proxy_args(&mut args, &env);

    assert_eq!(args, vec!["http_proxy=foo", "HTTP_PROXY=foo"]);
}

#[test]
fn existing_argument_in_either_case_suppresses_augmentation() {
    let env = EnvSnapshot::from_pairs([("http_proxy", "foo")]);

    let mut lower = vec!["http_proxy=mine".to_string()];
    augment_proxy_args(&mut lower, &env);
    assert_eq!(lower, vec!["http_proxy=mine"]);

    let mut upper = vec!["HTTP_PROXY=mine".to_string()];
    augment_proxy_args(&mut upper, &env);
    assert_eq!(upper, vec!["HTTP_PROXY=mine"]);
}

#[test]
fn augmented_args_follow_explicit_args() {
    let env = EnvSnapshot::from_pairs([("no_proxy", "localhost"), ("https_proxy", "https://p")]);
    let mut args = vec!["FOO=bar".to_string()];

    augment_proxy_args(&mut args, &env);

    assert_eq!(
        args,
        vec![
            "FOO=bar",
            "https_proxy=https://p",
            "HTTPS_PROXY=https://p",
            "no_proxy=localhost",
            "NO_PROXY=localhost",
        ]
    );
}

#[test]
fn empty_environment_adds_nothing() {
    let mut args = vec!["FOO=bar".to_string()];
    augment_proxy_args(&mut args, &EnvSnapshot::default());
    assert_eq!(args, vec!["FOO=bar"]);
}

#[test]
fn snapshot_captures_process_environment() {
    let vars: Vec<(&str, Option<&str>)> = ALL_PROXY_VARS
        .iter()
        .map(|&k| (k, if k == "HTTP_PROXY" { Some("foo") } else { None }))
        .collect();

    temp_env::with_vars(vars, || {
        let env = EnvSnapshot::from_process();
        let mut args = vec![];

        augment_proxy_args(&mut args, &env);

        assert_eq!(args, vec!["http_proxy=foo", "HTTP_PROXY=foo"]);
    });
}

#[test]
fn snapshot_is_not_affected_by_later_changes() {
    let env = temp_env::with_vars(
        [("HTTPS_PROXY", Some("before")), ("https_proxy", None)],
        EnvSnapshot::from_process,
    );

    temp_env::with_var("HTTPS_PROXY", Some("after"), || {
        assert_eq!(env.value("https_proxy"), Some("before"));
    });
}
