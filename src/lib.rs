pub mod check;
pub mod config;
pub mod domain;
pub mod parser;
pub mod utils;

pub use check::{HttpLicenseLookup, Reconciler};
pub use config::CliConfig;
pub use domain::model::{LicenseSpec, StationRegistry};
pub use domain::ports::{LicenseLookup, ReportSink, TracingSink};
pub use parser::{parse_spec, ParseError};
pub use utils::error::{CheckError, Result};
