//! The disallowed-content predicate

/// Substring that flags an actor as disallowed, compared case-insensitively
pub const MARKER: &str = "blood";

/// True when `actor` contains [`MARKER`] in any letter case.
pub fn is_disallowed(actor: &str) -> bool {
    actor.to_lowercase().contains(MARKER)
}
