/// A named boolean capability switch with a caller-defined default state.
///
/// Hosts declare these as `const` items and pass references into
/// `OverrideStore::is_enabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// Unique identifier, compared byte-for-byte against override names.
    /// Must be non-empty.
    pub name: &'static str,

    /// Value returned when no override matches.
    pub enabled_by_default: bool,
}

impl Feature {
    pub const fn new(name: &'static str, enabled_by_default: bool) -> Feature {
        Feature {
            name,
            enabled_by_default,
        }
    }
}
