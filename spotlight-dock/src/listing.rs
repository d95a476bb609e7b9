//! Parsing of the dock tool's `name\tpath` listing.

/// One pinned dock item as reported by the dock tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockItem<'a> {
    /// Label shown in the dock; never carries the bundle suffix.
    pub name: &'a str,
    /// Everything after the first tab.
    pub path: &'a str,
}

impl DockItem<'_> {
    /// Whether the item points into the managed store.
    pub fn is_managed(&self, store_prefix: &str) -> bool {
        self.path.contains(store_prefix)
    }
}

/// Parse a raw listing, in order. Blank lines and lines without a tab are dropped.
pub fn parse_listing(raw: &str) -> impl Iterator<Item = DockItem<'_>> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let (name, path) = line.split_once('\t')?;
            Some(DockItem { name, path })
        })
}
