pub mod lookup;
pub mod query;
pub mod reconcile;
pub mod registry;

pub use lookup::HttpLicenseLookup;
pub use reconcile::Reconciler;
