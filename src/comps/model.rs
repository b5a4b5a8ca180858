/// In-memory catalog of package groups.
///
/// A `Catalog` is built once at startup and only read afterwards. Groups are
/// stored in document order and indexed by their storage key, which is the
/// group's display name, not its id. See [`super::resolve::find_group`] for how
/// lookups bridge the two.
use std::collections::HashMap;

/// How strongly a group pulls in one of its packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReqKind {
    /// Always installed with the group.
    #[default]
    Mandatory,
    /// Installed unless deselected.
    Default,
    /// Only installed on request.
    Optional,
}

impl ReqKind {
    /// Map a `packagereq` `type` attribute to a kind. Unknown values are mandatory.
    #[must_use]
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("default") => Self::Default,
            Some("optional") => Self::Optional,
            _ => Self::Mandatory,
        }
    }

    /// Lowercase name as it appears in comps documents.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mandatory => "mandatory",
            Self::Default => "default",
            Self::Optional => "optional",
        }
    }
}

/// A single package requested by a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReq {
    /// Package name. Opaque to this tool.
    pub name: String,
    /// Request kind.
    pub kind: ReqKind,
}

impl PackageReq {
    /// A mandatory package request.
    #[cfg(test)]
    #[must_use]
    pub fn mandatory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ReqKind::Mandatory,
        }
    }
}

/// A named collection of installable packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Group identifier (e.g., "base").
    pub id: String,
    /// Display name (e.g., "Base"). Also the catalog's storage key.
    pub name: String,
    /// Free-form description. Empty when the document has none.
    pub description: String,
    /// Selected by default in installers.
    pub default: bool,
    /// Shown to users in installers.
    pub user_visible: bool,
    /// Packages in document order.
    pub packages: Vec<PackageReq>,
    /// Ids of other groups this group requires.
    pub group_reqs: Vec<String>,
}

impl Group {
    /// A visible, non-default group with the given fields and mandatory packages.
    #[cfg(test)]
    #[must_use]
    pub fn new<I, S>(id: &str, name: &str, description: &str, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
            default: false,
            user_visible: true,
            packages: packages.into_iter().map(PackageReq::mandatory).collect(),
            group_reqs: Vec::new(),
        }
    }

    /// Package names in document order.
    pub fn package_names(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(|p| p.name.as_str())
    }

    /// Storage key used by [`Catalog`]: the display name, or the id when unnamed.
    #[must_use]
    pub fn key(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Read-only collection of groups, keyed by group name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    groups: Vec<Group>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from groups in document order.
    ///
    /// A group whose key is already present replaces the earlier group in place,
    /// keeping the earlier position.
    #[must_use]
    pub fn from_groups(groups: impl IntoIterator<Item = Group>) -> Self {
        let mut catalog = Self::default();
        for group in groups {
            catalog.insert(group);
        }
        catalog
    }

    fn insert(&mut self, group: Group) {
        let key = group.key().to_owned();
        match self.index.get(&key) {
            Some(&slot) => {
                tracing::debug!(key = %key, "duplicate group key, replacing earlier entry");
                self.groups[slot] = group;
            }
            None => {
                self.index.insert(key, self.groups.len());
                self.groups.push(group);
            }
        }
    }

    /// Direct lookup by storage key (group name).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Group> {
        self.index.get(key).map(|&slot| &self.groups[slot])
    }

    /// All groups in catalog order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the catalog has no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
