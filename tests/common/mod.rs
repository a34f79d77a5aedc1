//! Shared utilities for integration testing.

use std::path::PathBuf;

use segment_router::config::parse_config;
use segment_router::Router;

/// Route table exercising statics, params and static/param overlap.
pub const ROUTES: &str = r#"
mount_prefix = "/api"

[[routes]]
name = "root"
pattern = "/"
handler = "index"

[[routes]]
name = "me"
pattern = "/users/me"
handler = "users.current"

[[routes]]
name = "user"
pattern = "/users/:id"
handler = "users.show"

[[routes]]
name = "user_posts"
pattern = "/users/:id/posts"
handler = "posts.index"

[[routes]]
name = "post"
pattern = "/users/:id/posts/:post"
handler = "posts.show"

[[routes]]
name = "settings"
pattern = "/users/me/settings"
handler = "settings.show"
"#;

/// Build a router from TOML text.
pub fn router_from(toml: &str) -> Router {
    let config = parse_config(toml).unwrap();
    Router::from_config(&config).unwrap()
}

/// Write `content` to a unique file in the temp dir.
#[allow(dead_code)]
pub fn write_temp_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "segment-router-{}-{name}.toml",
        std::process::id()
    ));
    std::fs::write(&path, content).unwrap();
    path
}
