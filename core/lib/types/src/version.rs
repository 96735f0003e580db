use std::{fmt, ops::Deref};

/// Default prefix of the version suffix, so that version 3 of `Mangrove`
/// lives under `Mangrove-v3`.
pub const DEFAULT_VERSION_PREFIX: &str = "-v";

/// Identifier of a historical deployment.
///
/// Versions are 1-based: there is no way to construct a `VersionId` of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VersionId(u32);

impl VersionId {
    /// The oldest historical deployment.
    pub const FIRST: VersionId = VersionId(1);

    /// Returns `None` for zero.
    pub fn new(id: u32) -> Option<Self> {
        if id == 0 {
            None
        } else {
            Some(Self(id))
        }
    }

    /// The version following this one, or `None` on overflow.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Version suffix used by the record storage, e.g. `-v3`.
    pub fn suffix(self, prefix: &str) -> String {
        format!("{}{}", prefix, self.0)
    }
}

impl_deref!(VersionId, u32);
impl_display!(VersionId);
