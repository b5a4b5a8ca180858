/// `grouppkgs` command: list a group's packages, one per line.
use std::io::Write;

use crate::cli::OutputCtx;
use crate::cli::args::GroupArgs;
use crate::cli::output::{write_not_found, write_package_list};
use crate::comps::{Catalog, CompsError, find_group};

/// Run `apt-groupinstall grouppkgs <group>`.
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

    let packages: Vec<String> = group.package_names().map(str::to_owned).collect();
    write_package_list(&packages, ctx, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::fixtures::{catalog, render};

    fn pkgs(group: &str, ctx: OutputCtx) -> String {
        let args = GroupArgs::new(group);
        render(|out| run(&args, &catalog(), ctx, out).unwrap())
    }

    #[test]
    fn test_bare_package_names() {
        assert_eq!(pkgs("base", OutputCtx::default()), "bash\ncoreutils\n");
    }

    #[test]
    fn test_resolves_by_id_only() {
        assert_eq!(pkgs("core", OutputCtx::default()), "glibc\nfilesystem\n");
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(pkgs("nosuch", OutputCtx::default()), "No such group: nosuch\n");
    }

    #[test]
    fn test_json_is_array_of_names() {
        let value: serde_json::Value =
            serde_json::from_str(&pkgs("Core", OutputCtx::new(true))).unwrap();
        assert_eq!(value, serde_json::json!(["glibc", "filesystem"]));
    }
}
