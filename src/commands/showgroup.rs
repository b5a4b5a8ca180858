/// `showgroup` command: show one group's id, description and packages.
use std::io::Write;

use crate::cli::OutputCtx;
use crate::cli::args::GroupArgs;
use crate::cli::output::{write_group_detail, write_not_found};
use crate::comps::{Catalog, CompsError, find_group};
use crate::types::GroupDetailOutput;

/// Run `apt-groupinstall showgroup <group>`.
///
/// # Errors
///
/// Returns `CompsError::Output` if writing fails.
pub fn run(
    args: &GroupArgs,
    catalog: &Catalog,
    ctx: OutputCtx,
    out: &mut dyn Write,
) -> Result<(), CompsError> {
    let Some(group) = find_group(catalog, &args.group) else {
        write_not_found(&args.group, ctx, out)?;
        return Ok(());
    };

    write_group_detail(&GroupDetailOutput::from(group), ctx, out)?;
    Ok(())
}
