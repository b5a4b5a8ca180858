/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout, either as JSON or rendered
/// as plain text. They are decoupled from the internal `Group` / `Catalog` types.
use serde::{Deserialize, Serialize};

use crate::comps::{CompsError, Group, PackageReq};

/// One line of `showgroups`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummaryOutput {
    /// Group id (e.g., "base").
    pub id: String,
    /// Display name (e.g., "Base").
    pub name: String,
}

impl From<&Group> for GroupSummaryOutput {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.clone(),
            name: group.name.clone(),
        }
    }
}

/// A package entry in group detail output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageOutput {
    /// Package name.
    pub name: String,
    /// Request kind: "mandatory", "default" or "optional".
    pub kind: String,
}

impl From<&PackageReq> for PackageOutput {
    fn from(req: &PackageReq) -> Self {
        Self {
            name: req.name.clone(),
            kind: req.kind.as_str().to_owned(),
        }
    }
}

/// Full detail of one group, as shown by `showgroup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDetailOutput {
    /// Group id (e.g., "base").
    pub id: String,
    /// Display name (e.g., "Base").
    pub name: String,
    /// Free-form description, empty when the catalog has none.
    pub description: String,
    /// Selected by default in installers.
    pub default: bool,
    /// Shown to users in installers.
    pub user_visible: bool,
    /// Packages in catalog order.
    pub packages: Vec<PackageOutput>,
    /// Ids of required groups.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub group_reqs: Vec<String>,
}

impl From<&Group> for GroupDetailOutput {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.clone(),
            name: group.name.clone(),
            description: group.description.clone(),
            default: group.default,
            user_visible: group.user_visible,
            packages: group.packages.iter().map(PackageOutput::from).collect(),
            group_reqs: group.group_reqs.clone(),
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    fn new(code: &str, message: String) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message,
            },
        }
    }

    /// Construct from a `CompsError`.
    #[must_use]
    pub fn from_comps_error(err: &CompsError) -> Self {
        Self::new(err.code(), err.to_string())
    }

    /// The lookup-miss envelope. Not an error exit, only an error-shaped result.
    #[must_use]
    pub fn group_not_found(query: &str) -> Self {
        Self::new("group_not_found", format!("No such group: {query}"))
    }
}
