//! Local persistence layer (file-backed key/value store).

pub mod local;

pub use local::LocalStore;

/// Storage keys as constants.
pub mod keys {
    /// JSON-serialized current user
    pub const USER: &str = "jurni_user";
    /// Theme string, `"dark"` or `"light"`
    pub const THEME: &str = "jurni_theme";
}
