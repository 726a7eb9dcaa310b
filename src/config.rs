/// Backend base URL, fixed at compile time:
/// - development: http://localhost:8080 (default)
/// - production: via BACKEND_URL in .env (see build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};
