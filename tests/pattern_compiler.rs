use wharf_router::pattern::{PatternError, canonical, compile};
use wharf_router::{Method, Router, RouterError};

#[test]
fn compiler_when_same_pattern_compiled_twice_then_segments_are_identical() {
    let pattern = "/api/projects/:pid([0-9]+)/members/?:pmid([0-9]+)";
    let first = compile(pattern).expect("pattern should compile");
    let second = compile(pattern).expect("pattern should compile again");
    assert_eq!(first, second);
}

#[test]
fn compiler_when_constraint_regex_invalid_then_returns_error() {
    let err = compile("/api/users/:id([0-9+)").expect_err("expected invalid constraint");
    match err {
        PatternError::InvalidConstraint {
            name, constraint, ..
        } => {
            assert_eq!(name, "id");
            assert_eq!(constraint, "[0-9+");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn compiler_when_wildcard_is_mid_pattern_then_it_compiles() {
    let segments = compile("/api/repositories/*/tags/:tag/manifest")
        .expect("mid-pattern wildcard should compile");
    assert_eq!(canonical(&segments), "/api/repositories/*/tags/:tag/manifest");
}

#[test]
fn compiler_when_second_wildcard_appears_then_returns_error() {
    let err = compile("/api/repositories/*/tags/*").expect_err("expected misplaced wildcard");
    match err {
        PatternError::MisplacedWildcard { pattern } => {
            assert_eq!(pattern, "/api/repositories/*/tags/*");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn compiler_when_optional_param_follows_wildcard_then_returns_error() {
    let err = compile("/api/repositories/*/?:tag").expect_err("expected misplaced wildcard");
    assert!(matches!(err, PatternError::MisplacedWildcard { .. }));
}

#[test]
fn compiler_when_parameter_name_repeats_then_returns_error() {
    let err = compile("/api/:id/sub/:id").expect_err("expected duplicate parameter");
    match err {
        PatternError::DuplicateParam { name, .. } => assert_eq!(name, "id"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn compiler_when_parameter_missing_name_then_returns_error() {
    let err = compile("/api/:").expect_err("expected missing name");
    assert!(matches!(err, PatternError::MissingParamName { .. }));

    let err = compile("/api/:([0-9]+)").expect_err("expected missing name for constraint");
    assert!(matches!(err, PatternError::MissingParamName { .. }));
}

#[test]
fn compiler_when_parameter_name_starts_with_digit_then_returns_error() {
    let err = compile("/api/:1id").expect_err("expected invalid start");
    match err {
        PatternError::InvalidParamStart { name, found, .. } => {
            assert_eq!(name, "1id");
            assert_eq!(found, '1');
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn compiler_when_parameter_name_has_invalid_character_then_returns_error() {
    let err = compile("/api/:id-raw").expect_err("expected invalid character");
    match err {
        PatternError::InvalidParamChar { invalid, .. } => assert_eq!(invalid, '-'),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn compiler_when_canonical_text_recompiled_then_segments_round_trip() {
    let segments = compile("/api/projects/:id([0-9]+)/metadatas/?:name/").unwrap();
    let text = canonical(&segments);
    assert_eq!(text, "/api/projects/:id([0-9]+)/metadatas/?:name");
    assert_eq!(compile(&text).unwrap(), segments);
}

#[test]
fn router_when_pattern_invalid_then_registration_fails_at_boot() {
    let router: Router<&'static str> = Router::new();
    let err = router
        .add(Method::Get, "/api/users/:id([)", "users.get")
        .expect_err("expected pattern error to surface through registration");
    match err {
        RouterError::Pattern(PatternError::InvalidConstraint { name, .. }) => {
            assert_eq!(name, "id");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
