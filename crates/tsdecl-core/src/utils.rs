/// Lower-case the first character, leaving the rest unchanged.
///
/// This is the member-name rewrite for the emitted declarations: the host
/// convention capitalizes members, the target convention does not. Only
/// the first character changes, so acronym tails survive as-is.
///
/// # Examples
/// ```
/// use tsdecl_core::utils::lower_first;
/// assert_eq!(lower_first("UserName"), "userName");
/// assert_eq!(lower_first("ID"), "iD");
/// assert_eq!(lower_first("execute"), "execute");  // idempotent
/// ```
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
