/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod grouppkgs;
pub mod showgroup;
pub mod showgroups;

use std::io::Write;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::comps::{Catalog, CompsError};

/// Dispatch a parsed `Command` to its handler, writing results to `out`.
///
/// # Errors
///
/// Returns `CompsError::Output` if writing to `out` fails. A group that
/// cannot be found is reported on `out` and is not an error.
pub fn dispatch(
    command: &Command,
    catalog: &Catalog,
    ctx: OutputCtx,
    out: &mut dyn Write,
) -> Result<(), CompsError> {
    match command {
        Command::ShowGroups(_) => showgroups::run(catalog, ctx, out),
        Command::ShowGroup(args) => showgroup::run(args, catalog, ctx, out),
        Command::GroupPkgs(args) => grouppkgs::run(args, catalog, ctx, out),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::GroupArgs;

    #[test]
    fn test_dispatch_routes_to_handler() {
        let catalog = fixtures::catalog();
        let command = Command::GroupPkgs(GroupArgs::new("base"));
        let text = fixtures::render(|out| {
            dispatch(&command, &catalog, OutputCtx::default(), out).unwrap();
        });
        assert_eq!(text, "bash\ncoreutils\n");
    }
}
