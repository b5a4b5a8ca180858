/// Catalog domain layer: data model, loading, group resolution.
pub mod errors;
pub mod load;
pub mod model;
pub mod resolve;

pub use errors::CompsError;
pub use load::{DEFAULT_COMPS_PATH, load_catalog};
pub use model::{Catalog, Group, PackageReq};
pub use resolve::find_group;
