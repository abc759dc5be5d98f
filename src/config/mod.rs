use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;

pub const DEFAULT_ENDPOINT: &str = "https://www.tele.soumu.go.jp/musen/list";

#[derive(Debug, Clone, Parser)]
#[command(name = "musen-check")]
#[command(about = "Checks a local FM station registry against MIC radio license records")]
pub struct CliConfig {
    /// Path to the station registry file
    #[arg(long, default_value = "./stations.json")]
    pub stations: String,

    /// Base URL of the license list endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Run the local registry checks only, skipping remote lookups
    #[arg(long)]
    pub offline: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("stations", &self.stations)?;
        validate_url("endpoint", &self.endpoint)?;
        Ok(())
    }
}
