// Crate identity from Cargo metadata, reported by the host binary.

/// Package version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name (from Cargo.toml).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// `"<name> <version>"`, e.g. for usage text.
pub fn banner() -> String {
    format!("{} {}", NAME, VERSION)
}
