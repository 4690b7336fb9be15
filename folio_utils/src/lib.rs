mod macros;

/// Version string reported by the binaries and sent in the HTTP user agent.
///
/// Release builds may set `FOLIO_VERSION` at compile time (e.g. to a git
/// describe string), otherwise the crate version is used.
pub fn folio_version() -> &'static str {
    option_env!("FOLIO_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}
