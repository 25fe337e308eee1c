//! Item-to-section resolution.

use crate::geometry::Coordinate;

/// Where an item lives in the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location<'a> {
    /// Name of the shelf section holding the item.
    pub section: &'a str,
    /// Representative coordinate of that section.
    pub coordinate: Coordinate,
}

/// Read-only lookup of item locations plus the fixed route endpoints.
///
/// Implementations must be pure: the same item always resolves to the same
/// location, and nothing is mutated by a lookup. This lets one resolver be
/// shared by any number of concurrent searches.
pub trait LocationResolver: Send + Sync {
    /// Resolves an item name to its section and coordinate.
    fn resolve(&self, item: &str) -> Option<Location<'_>>;

    /// Where every route starts.
    fn entrance(&self) -> Coordinate;

    /// Where every route ends.
    fn exit(&self) -> Coordinate;

    /// Returns every item name that does not resolve, preserving input order.
    fn unresolved<'i, I>(&self, items: &'i [I]) -> Vec<&'i str>
    where
        I: AsRef<str>,
        Self: Sized,
    {
        items
            .iter()
            .map(AsRef::as_ref)
            .filter(|item| self.resolve(item).is_none())
            .collect()
    }
}
