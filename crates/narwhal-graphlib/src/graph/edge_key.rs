//! Edge identity.
//!
//! An edge is `v -> w` plus an optional name that tells parallel multigraph edges apart.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub v: String,
    pub w: String,
    pub name: Option<String>,
}

impl EdgeKey {
    pub fn new(
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<impl Into<String>>,
    ) -> Self {
        Self {
            v: v.into(),
            w: w.into(),
            name: name.map(Into::into),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.v == self.w
    }

    pub(in crate::graph) fn as_ref(&self) -> EdgeRef<'_> {
        EdgeRef {
            v: &self.v,
            w: &self.w,
            name: self.name.as_deref(),
        }
    }
}

/// Borrowed form of [`EdgeKey`] for allocation-free index lookups.
///
/// Field order and types mirror `EdgeKey`, so both derive the same hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(in crate::graph) struct EdgeRef<'a> {
    pub(in crate::graph) v: &'a str,
    pub(in crate::graph) w: &'a str,
    pub(in crate::graph) name: Option<&'a str>,
}

impl hashbrown::Equivalent<EdgeKey> for EdgeRef<'_> {
    fn equivalent(&self, key: &EdgeKey) -> bool {
        *self == key.as_ref()
    }
}
