/// `showgroups` command: list every group in catalog order.
use std::io::Write;

use crate::cli::OutputCtx;
use crate::cli::output::write_group_list;
use crate::comps::{Catalog, CompsError};
use crate::types::GroupSummaryOutput;

/// Run `apt-groupinstall showgroups`.
///
/// # Errors
///
/// Returns `CompsError::Output` if writing fails.
pub fn run(catalog: &Catalog, ctx: OutputCtx, out: &mut dyn Write) -> Result<(), CompsError> {
    let output: Vec<GroupSummaryOutput> = catalog.groups().map(GroupSummaryOutput::from).collect();
    write_group_list(&output, ctx, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::fixtures::render;
    use crate::comps::Group;

    #[test]
    fn test_one_line_per_group_in_catalog_order() {
        let catalog = Catalog::from_groups([
            Group::new("base", "Base", "", Vec::<String>::new()),
            Group::new("core", "Core", "", Vec::<String>::new()),
        ]);
        let text = render(|out| run(&catalog, OutputCtx::default(), out).unwrap());
        assert_eq!(text, "base (Base)\ncore (Core)\n");
    }

    #[test]
    fn test_empty_catalog_prints_nothing() {
        let text = render(|out| run(&Catalog::default(), OutputCtx::default(), out).unwrap());
        assert_eq!(text, "");
    }

    #[test]
    fn test_json_listing() {
        let catalog = crate::commands::fixtures::catalog();
        let text = render(|out| run(&catalog, OutputCtx::new(true), out).unwrap());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[1]["id"], "core");
        assert_eq!(value[1]["name"], "Core");
    }
}
