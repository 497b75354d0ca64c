use wharf_router::{Dispatch, Method, MethodSet, Router};

#[test]
fn router_when_method_not_bound_then_returns_method_not_allowed_with_set() {
    let router = Router::new();
    router
        .add(Method::Get, "/api/users/:id", "user.get")
        .expect("get should register");
    router
        .add(Method::Delete, "/api/users/:id", "user.delete")
        .expect("delete should register");
    let table = router.freeze();

    match table.dispatch(Method::Post, "/api/users/7") {
        Dispatch::MethodNotAllowed { allowed } => {
            assert_eq!(
                allowed,
                MethodSet::from(Method::Get) | MethodSet::from(Method::Delete)
            );
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn router_when_path_matches_first_route_then_method_scan_does_not_continue() {
    // The first structural match is the only candidate: a later route with
    // the same shape and the right method must not be consulted.
    let router = Router::new();
    router
        .add(Method::Get, "/api/targets", "targets.list")
        .expect("get route should register");
    router
        .add(Method::Post, "/api/:section", "section.create")
        .expect("post route should register");
    let table = router.freeze();

    match table.dispatch(Method::Post, "/api/targets") {
        Dispatch::MethodNotAllowed { allowed } => {
            assert_eq!(allowed, MethodSet::from(Method::Get));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn router_when_any_method_bound_then_every_method_matches() {
    let router = Router::new();
    router
        .add_any("/service/token", "token.any")
        .expect("any-method route should register");
    let table = router.freeze();

    for method in [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Patch,
        Method::Head,
        Method::Options,
    ] {
        assert!(
            matches!(table.dispatch(method, "/service/token"), Dispatch::Match { .. }),
            "any-method route should answer {method}"
        );
    }
}

#[test]
fn router_when_explicit_method_and_any_coexist_then_explicit_wins() {
    let router = Router::new();
    router
        .add_any("/api/search", "search.any")
        .expect("any binding should register");
    router
        .add(Method::Get, "/api/search", "search.get")
        .expect("explicit binding should register");
    let table = router.freeze();

    match table.dispatch(Method::Get, "/api/search") {
        Dispatch::Match { handler, .. } => assert_eq!(*handler, "search.get"),
        other => panic!("unexpected outcome: {other:?}"),
    }
    match table.dispatch(Method::Post, "/api/search") {
        Dispatch::Match { handler, .. } => assert_eq!(*handler, "search.any"),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn router_when_no_route_matches_then_fallback_is_not_found() {
    let router = Router::new();
    router
        .add(Method::Get, "/api/health", "health")
        .expect("route should register");
    let table = router.freeze();

    let outcome = table.dispatch(Method::Get, "/api/missing");
    let fallback = outcome.fallback().expect("miss should have a fallback");
    assert_eq!(fallback.status, 404);
    assert_eq!(fallback.allow, None);
}

#[test]
fn router_when_method_not_allowed_then_fallback_carries_allow_header() {
    let router = Router::new();
    router
        .add(Method::Get, "/api/logs", "logs.list")
        .expect("get should register");
    router
        .add(Method::Put, "/api/logs", "logs.rotate")
        .expect("put should register");
    let table = router.freeze();

    let outcome = table.dispatch(Method::Delete, "/api/logs");
    let fallback = outcome.fallback().expect("miss should have a fallback");
    assert_eq!(fallback.status, 405);
    assert_eq!(fallback.allow.as_deref(), Some("GET, PUT"));
}

#[test]
fn router_when_route_matches_then_fallback_is_none() {
    let router = Router::new();
    router
        .add(Method::Get, "/api/health", "health")
        .expect("route should register");
    let table = router.freeze();

    assert!(table.dispatch(Method::Get, "/api/health").fallback().is_none());
}
