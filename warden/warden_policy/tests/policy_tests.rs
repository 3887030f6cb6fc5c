//! End-to-end tests of username policies against the built-in providers.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use warden_core::error::{Error, PolicyError};
use warden_core::utils::WardenConfig;
use warden_policy::{
    ClauseTable, InMemoryProviderRegistry, LengthConfig, NotEmailConfig, PolicyEngine,
    RegexPatternConfig, UsernamePolicy, REGEX_PATTERN_ID,
};

fn engine() -> PolicyEngine<InMemoryProviderRegistry> {
    PolicyEngine::new(InMemoryProviderRegistry::with_builtin_providers(
        &WardenConfig::default(),
    ))
}

#[test]
fn test_multi_clause_policy() {
    let engine = engine();
    let policy = engine
        .parse_and_validate(Some("length(3,255) and regexPattern(^[a-z]+$)"))
        .unwrap();

    assert_eq!(
        policy.policy_names(),
        ["length", "regexPattern"].into_iter().collect::<HashSet<_>>()
    );
    assert_eq!(
        policy.config::<LengthConfig>("length"),
        Some(&LengthConfig { min: 3, max: 255 })
    );

    let pattern = policy
        .config::<RegexPatternConfig>(REGEX_PATTERN_ID)
        .unwrap();
    assert!(pattern.pattern().is_match("alice"));
    assert!(!pattern.pattern().is_match("Alice1"));

    assert_eq!(
        policy.to_policy_string().as_deref(),
        Some("length(3,255) and regexPattern(^[a-z]+$)")
    );
}

#[test]
fn test_clause_without_argument_uses_defaults() {
    let policy = engine().parse_and_validate(Some("length and notEmail")).unwrap();

    assert_eq!(
        policy.config::<LengthConfig>("length"),
        Some(&LengthConfig { min: 3, max: 255 })
    );
    assert_eq!(policy.config::<NotEmailConfig>("notEmail"), Some(&NotEmailConfig));
    assert_eq!(policy.to_string(), "length and notEmail");
}

#[test]
fn test_unknown_clause_is_not_found() {
    let result = engine().parse_and_validate(Some("length(1,2) and bogus"));

    match result {
        Err(Error::Policy(PolicyError::NotFound(name))) => assert_eq!(name, "bogus"),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn test_rejected_pattern_is_invalid_config() {
    let result = engine().parse_and_validate(Some("length and regexPattern(()"));

    match result {
        Err(Error::Policy(error @ PolicyError::InvalidConfig { .. })) => {
            assert_eq!(error.policy_name(), "regexPattern");
            let message = error.to_string();
            assert!(message.starts_with("Invalid config for regexPattern: "));
            assert!(message.contains("invalid argument '('"));
        }
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn test_errors_are_distinguishable() {
    let engine = engine();

    let not_found = engine.parse_and_validate(Some("maxAge(3)")).unwrap_err();
    let invalid = engine.parse_and_validate(Some("length(x)")).unwrap_err();

    assert!(matches!(not_found, Error::Policy(PolicyError::NotFound(_))));
    assert!(matches!(
        invalid,
        Error::Policy(PolicyError::InvalidConfig { .. })
    ));
}

#[test]
fn test_builder_round_trip() {
    let registry = InMemoryProviderRegistry::with_builtin_providers(&WardenConfig::default());

    let mut builder = UsernamePolicy::builder();
    builder
        .put("length", Some("4,20"))
        .put("notEmail", None)
        .put("regexPattern", Some("^[a-z][a-z0-9_]*$"));
    let policy = builder.build(&registry).unwrap();

    let text = policy.to_policy_string().unwrap();
    assert_eq!(
        text,
        "length(4,20) and notEmail and regexPattern(^[a-z][a-z0-9_]*$)"
    );

    let reparsed = UsernamePolicy::parse(&registry, Some(&text)).unwrap();
    assert_eq!(reparsed.to_builder(), builder);
    assert_eq!(reparsed.policy_names(), policy.policy_names());
}

#[test]
fn test_modify_through_builder() {
    let engine = engine();
    let policy = engine
        .parse_and_validate(Some("length(3,255) and notEmail"))
        .unwrap();

    let mut builder = engine.to_builder(&policy);
    builder.put("length", Some("5,10")).remove("notEmail");
    let updated = engine.validate(&builder).unwrap();

    assert_eq!(policy.to_string(), "length(3,255) and notEmail");
    assert_eq!(updated.to_string(), "length(5,10)");
    assert_eq!(
        updated.config::<LengthConfig>("length"),
        Some(&LengthConfig { min: 5, max: 10 })
    );
}

#[test]
fn test_empty_policy() {
    let engine = engine();
    let policy = engine.parse_and_validate(None).unwrap();

    assert!(policy.is_empty());
    assert_eq!(engine.serialize(&policy), None);
    assert_eq!(ClauseTable::parse(Some("")).to_policy_string(), None);
}

#[test]
fn test_policy_is_shareable_across_threads() {
    let policy = Arc::new(
        engine()
            .parse_and_validate(Some("length(3,8) and regexPattern(^[a-z]+$)"))
            .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let policy = Arc::clone(&policy);
            thread::spawn(move || {
                let length = policy.config::<LengthConfig>("length").unwrap();
                let pattern = policy.config::<RegexPatternConfig>("regexPattern").unwrap();
                (length.max, pattern.as_str().to_string())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (8, "^[a-z]+$".to_string()));
    }
}
