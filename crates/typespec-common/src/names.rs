//! Naming constants shared by the resolver and its consumers.

/// Name given to object types whose declaration carries no name.
pub const ANONYMOUS_NAME: &str = "[ANONYMOUS]";

/// Member suffix used for constructor signatures.
pub const CONSTRUCTOR_SUFFIX: &str = "constructor";

/// Build a fully-qualified reference from the enclosing path and a member.
///
/// Path segments are joined with `.` as-is, so an empty path produces
/// `.constructor` and an empty segment produces an empty slot
/// (`["", "Client"]` -> `.Client.constructor`).
pub fn qualified_name<S: AsRef<str>>(path: &[S], member: &str) -> String {
    let mut out = String::new();
    for (i, segment) in path.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push_str(segment.as_ref());
    }
    out.push('.');
    out.push_str(member);
    out
}
