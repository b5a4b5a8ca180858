/// Output formatting: plain text and JSON renderings, usage text, errors.
///
/// Plain text is the stable interface other tools parse, so its layout is
/// fixed line-for-line. JSON is opt-in via `--json`.
use std::io::{self, Write};

use serde::Serialize;

use crate::types::{ErrorOutput, GroupDetailOutput, GroupSummaryOutput};

/// Output context passed to all formatters.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputCtx {
    /// Render JSON instead of plain text.
    pub json: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

// --- Group list ---

/// Write the `showgroups` listing.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_group_list(
    groups: &[GroupSummaryOutput],
    ctx: OutputCtx,
    out: &mut dyn Write,
) -> io::Result<()> {
    if ctx.json {
        return write_json(groups, out);
    }
    for group in groups {
        writeln!(out, "{} ({})", group.id, group.name)?;
    }
    Ok(())
}

// --- Group detail ---

/// Write the `showgroup` detail block.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_group_detail(
    group: &GroupDetailOutput,
    ctx: OutputCtx,
    out: &mut dyn Write,
) -> io::Result<()> {
    if ctx.json {
        return write_json(group, out);
    }
    writeln!(out, "Group: {}", group.id)?;
    writeln!(out, "Description: {}", group.description)?;
    writeln!(out, "Packages: ")?;
    for pkg in &group.packages {
        writeln!(out, "  {}", pkg.name)?;
    }
    Ok(())
}

// --- Package list ---

/// Write the `grouppkgs` listing: bare package names, one per line.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_package_list(packages: &[String], ctx: OutputCtx, out: &mut dyn Write) -> io::Result<()> {
    if ctx.json {
        return write_json(packages, out);
    }
    for pkg in packages {
        writeln!(out, "{pkg}")?;
    }
    Ok(())
}

// --- Lookup miss ---

/// Report that no group matched `query`. Goes to stdout; not an error exit.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_not_found(query: &str, ctx: OutputCtx, out: &mut dyn Write) -> io::Result<()> {
    let miss = ErrorOutput::group_not_found(query);
    if ctx.json {
        return write_json(&miss, out);
    }
    writeln!(out, "{}", miss.error.message)
}

// --- Usage ---

/// Usage text listing the three invocation forms for program name `prog`.
#[must_use]
pub fn usage_text(prog: &str) -> String {
    format!(
        "Usage: {prog} showgroups\n       \
         {prog} showgroup <group>\n       \
         {prog} grouppkgs <group>\n"
    )
}

/// Write the usage text.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_usage(prog: &str, out: &mut dyn Write) -> io::Result<()> {
    out.write_all(usage_text(prog).as_bytes())
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, ctx: OutputCtx) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    if ctx.json {
        let s = serde_json::to_string_pretty(err).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "Error: {}", err.error.message);
    }
}

// --- Generic JSON helpers ---

fn write_json<T: Serialize + ?Sized>(value: &T, out: &mut dyn Write) -> io::Result<()> {
    let s = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(out, "{s}")
}
