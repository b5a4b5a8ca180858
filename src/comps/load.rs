/// Catalog loading: map a comps XML document onto the [`Catalog`] model.
///
/// Parsing itself is done by quick-xml's serde deserializer. The `*Xml` types
/// below mirror the document shape; everything else about the format
/// (DOCTYPE, `grouphierarchy`, unknown elements) is ignored.
use std::path::Path;
use std::time::Instant;

use serde::Deserialize;

use super::errors::CompsError;
use super::model::{Catalog, Group, PackageReq, ReqKind};

/// Fixed location of the group catalog.
pub const DEFAULT_COMPS_PATH: &str = "/usr/share/comps/i386/comps.xml";

#[derive(Debug, Deserialize)]
struct CompsXml {
    #[serde(rename = "group", default)]
    groups: Vec<GroupXml>,
}

#[derive(Debug, Deserialize)]
struct GroupXml {
    id: String,
    #[serde(rename = "name", default)]
    names: Vec<LocalizedXml>,
    #[serde(rename = "description", default)]
    descriptions: Vec<LocalizedXml>,
    #[serde(default)]
    default: Option<String>,
    #[serde(default)]
    uservisible: Option<String>,
    #[serde(default)]
    packagelist: Option<PackageListXml>,
    #[serde(default)]
    grouplist: Option<GroupListXml>,
}

#[derive(Debug, Deserialize)]
struct LocalizedXml {
    // quick-xml hands attributes over by local name; the alias covers
    // deserializers that keep the prefix.
    #[serde(rename = "@lang", alias = "@xml:lang", default)]
    lang: Option<String>,
    #[serde(rename = "$text", default)]
    text: String,
}

#[derive(Debug, Default, Deserialize)]
struct PackageListXml {
    #[serde(rename = "packagereq", default)]
    reqs: Vec<PackageReqXml>,
}

#[derive(Debug, Deserialize)]
struct PackageReqXml {
    #[serde(rename = "@type", default)]
    kind: Option<String>,
    #[serde(rename = "$text", default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct GroupListXml {
    #[serde(rename = "groupreq", default)]
    reqs: Vec<String>,
}

/// Load the catalog stored at `path`.
///
/// # Errors
///
/// - `CompsError::Read` — the file cannot be read
/// - `CompsError::Parse` — the file is not a comps document
pub fn load_catalog(path: &Path) -> Result<Catalog, CompsError> {
    let start = Instant::now();
    let xml = std::fs::read_to_string(path).map_err(|source| CompsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&xml).map_err(|source| CompsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        groups = catalog.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "catalog loaded"
    );
    Ok(catalog)
}

/// Parse a comps document held in memory.
///
/// # Errors
///
/// Returns the deserializer error when the document is malformed or a group
/// has no `<id>`.
pub fn parse_catalog(xml: &str) -> Result<Catalog, quick_xml::DeError> {
    let doc: CompsXml = quick_xml::de::from_str(xml)?;
    Ok(Catalog::from_groups(doc.groups.into_iter().map(group_from_xml)))
}

fn group_from_xml(raw: GroupXml) -> Group {
    let id = raw.id.trim().to_owned();
    let name = untranslated(&raw.names).unwrap_or_default();
    let description = untranslated(&raw.descriptions).unwrap_or_default();
    let packages = raw
        .packagelist
        .unwrap_or_default()
        .reqs
        .into_iter()
        .map(|req| PackageReq {
            name: req.name.trim().to_owned(),
            kind: ReqKind::from_attr(req.kind.as_deref()),
        })
        .filter(|req| !req.name.is_empty())
        .collect();
    let group_reqs = raw
        .grouplist
        .unwrap_or_default()
        .reqs
        .into_iter()
        .map(|r| r.trim().to_owned())
        .filter(|r| !r.is_empty())
        .collect();

    Group {
        default: parse_flag(raw.default.as_deref()).unwrap_or(false),
        user_visible: parse_flag(raw.uservisible.as_deref()).unwrap_or(true),
        id,
        name,
        description,
        packages,
        group_reqs,
    }
}

/// Pick the entry without `xml:lang`, falling back to the first entry.
fn untranslated(entries: &[LocalizedXml]) -> Option<String> {
    entries
        .iter()
        .find(|e| e.lang.is_none())
        .or_else(|| entries.first())
        .map(|e| e.text.trim().to_owned())
}

fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        other => {
            tracing::warn!(value = other, "unrecognized boolean in catalog, using default");
            None
        }
    }
}
