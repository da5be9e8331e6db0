//! Application Constants
//!
//! API routes, defaults and UI sizing shared across the crate.

/// Default API server
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// `GET /api/user/{id}`
pub const USER_ENDPOINT: &[&str] = &["api", "user"];
/// `POST /api/followers/seguir/{id}`
pub const FOLLOW_ENDPOINT: &[&str] = &["api", "followers", "seguir"];
/// `POST /api/followers/dejar-seguir/{id}`
pub const UNFOLLOW_ENDPOINT: &[&str] = &["api", "followers", "dejar-seguir"];
/// `POST /api/auth/register/user`
pub const REGISTER_ENDPOINT: &[&str] = &["api", "auth", "register", "user"];

/// Avatar shown when a profile has no picture
pub const DEFAULT_AVATAR_URL: &str = "https://storage.googleapis.com/a1aa/image/Mu0ExRQkd0JqAtVC0PkQNVV8VJfpubi9jIe6TyXjgQBngzjTA.jpg";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "social-gui.toml";
/// Log file prefix inside the data directory
pub const LOG_FILE_PREFIX: &str = "social-gui.log";

/// Toasts kept on screen at once
pub const TOAST_CAPACITY: usize = 5;
/// Seconds before a toast is dismissed automatically
pub const TOAST_TTL_SECS: i64 = 4;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 640.0;

/// Avatar edge length in the profile header
pub const AVATAR_SIZE: f32 = 128.0;
