//! Namespace resolution over dot-separated qualified names.

/// Reserved namespace of host built-ins. Types under it are mapped
/// through the primitive table and never extracted.
pub const BUILTIN_NAMESPACE: &str = "System";

/// Namespace of a qualified name: every segment except the last.
///
/// Built-in types resolve to the global namespace regardless of how many
/// segments follow the marker.
pub(crate) fn namespace_of(qualified: &str) -> &str {
    if is_builtin(qualified) {
        return "";
    }
    match qualified.rfind('.') {
        Some(dot) => &qualified[..dot],
        None => "",
    }
}

/// Final segment of a qualified name.
pub(crate) fn short_name(qualified: &str) -> &str {
    match qualified.rfind('.') {
        Some(dot) => &qualified[dot + 1..],
        None => qualified,
    }
}

/// Whether the first segment of a qualified name is the reserved
/// built-in namespace marker.
pub(crate) fn is_builtin(qualified: &str) -> bool {
    qualified.split('.').next() == Some(BUILTIN_NAMESPACE)
}
