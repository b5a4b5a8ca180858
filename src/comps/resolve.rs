/// Group resolution: turn a user-supplied group string into a `Group`.
///
/// Resolution strategy (in priority order):
///
/// 1. **Storage key**: direct lookup in the catalog index, which is keyed by
///    group name.
/// 2. **Id scan**: walk all groups in catalog order and take the first whose
///    `id` equals the input.
///
/// The catalog is keyed by name while users usually type ids, so a group's
/// display id and its storage key can differ. Both tiers are kept on purpose.
use super::model::{Catalog, Group};

/// Resolve `query` to a group, or `None` when neither tier matches.
#[must_use]
pub fn find_group<'a>(catalog: &'a Catalog, query: &str) -> Option<&'a Group> {
    if let Some(group) = catalog.get(query) {
        tracing::debug!(query, "group resolved by storage key");
        return Some(group);
    }

    let found = catalog.groups().find(|g| g.id == query);
    if found.is_some() {
        tracing::debug!(query, "group resolved by id scan");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_groups([
            Group::new("base", "Base", "Basic set", ["bash", "coreutils"]),
            Group::new("core", "Core", "", ["glibc"]),
        ])
    }

    #[test]
    fn test_resolve_by_storage_key() {
        let c = catalog();
        let group = find_group(&c, "Base").unwrap();
        assert_eq!(group.id, "base");
    }

    #[test]
    fn test_resolve_by_id_scan() {
        let c = catalog();
        let group = find_group(&c, "core").unwrap();
        assert_eq!(group.name, "Core");
    }

    #[test]
    fn test_storage_key_wins_over_id() {
        // "core" is the key of one group and the id of another.
        let c = Catalog::from_groups([
            Group::new("core", "Core Utilities", "by id", Vec::<String>::new()),
            Group::new("minimal", "core", "by key", Vec::<String>::new()),
        ]);
        let group = find_group(&c, "core").unwrap();
        assert_eq!(group.description, "by key");
    }

    #[test]
    fn test_id_scan_returns_first_match() {
        let c = Catalog::from_groups([
            Group::new("dup", "First", "", Vec::<String>::new()),
            Group::new("dup", "Second", "", Vec::<String>::new()),
        ]);
        assert_eq!(find_group(&c, "dup").unwrap().name, "First");
    }

    #[test]
    fn test_not_found() {
        let c = catalog();
        assert!(find_group(&c, "nosuch").is_none());
    }

    #[test]
    fn test_resolution_is_case_sensitive() {
        let c = catalog();
        assert!(find_group(&c, "BASE").is_none());
    }
}
