//! End-to-end route resolution from a TOML route table.

use segment_router::config::{load_config, parse_config, ConfigError};
use segment_router::Router;

mod common;

#[test]
fn test_static_wins_over_param() {
    let router = common::router_from(common::ROUTES);

    let m = router.resolve("/api/users/me").unwrap();
    assert_eq!(m.route, "me");
    assert!(m.params.is_empty());

    let m = router.resolve("/api/users/me/settings").unwrap();
    assert_eq!(m.handler, "settings.show");
}

#[test]
fn test_backtracks_into_param_branch() {
    let router = common::router_from(common::ROUTES);

    // `me` exists as a static, but only `:id` has a `posts` child.
    let m = router.resolve("/api/users/me/posts").unwrap();
    assert_eq!(m.route, "user_posts");
    assert_eq!(m.params["id"], "me");

    let m = router.resolve("/api/users/me/posts/3").unwrap();
    assert_eq!(m.route, "post");
    assert_eq!(m.params.len(), 2);
    assert_eq!(m.params["post"], "3");
}

#[test]
fn test_trailing_slash_and_root() {
    let router = common::router_from(common::ROUTES);

    assert_eq!(router.resolve("/api").unwrap().route, "root");
    assert_eq!(router.resolve("/api/").unwrap().route, "root");
    assert_eq!(router.resolve("/api/users/42/").unwrap().route, "user");
}

#[test]
fn test_no_match() {
    let router = common::router_from(common::ROUTES);

    assert!(router.resolve("/api/users").is_none());
    assert!(router.resolve("/api/users/42/comments").is_none());
    assert!(router.resolve("/api/users//posts").is_none());
    assert!(router.resolve("/users/42").is_none());

    // Shares a string prefix with the mount but not a segment boundary.
    assert!(router.resolve("/apix").is_none());
    assert!(router.resolve("/apiXusers/me").is_none());

    // The mount prefix repeated mid-path is not stripped again.
    assert!(router.resolve("/api/users/api/7").is_none());
    assert!(router.resolve("/api/users/7/api").is_none());
}

#[test]
fn test_load_from_file() {
    let path = common::write_temp_config("load", common::ROUTES);
    let config = load_config(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let router = Router::from_config(&config).unwrap();
    assert_eq!(router.routes().len(), 6);
    assert_eq!(router.mount_prefix(), "/api");
}

#[test]
fn test_conflicting_routes_rejected() {
    let err = parse_config(
        r#"
        [[routes]]
        name = "a"
        pattern = "/x/:id"
        handler = "a"

        [[routes]]
        name = "b"
        pattern = "/x/:id/"
        handler = "b"
        "#,
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
    assert_eq!(
        err.to_string(),
        "Validation failed: route `b` conflicts with route `a`"
    );
}
