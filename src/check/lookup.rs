use crate::domain::model::LookupResponse;
use crate::domain::ports::{LicenseLookup, LookupOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Lookup against the MIC license list endpoint.
pub struct HttpLicenseLookup {
    endpoint: String,
    client: Client,
}

impl HttpLicenseLookup {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl LicenseLookup for HttpLicenseLookup {
    async fn fetch(&self, query: &[(&'static str, String)]) -> Result<LookupOutcome> {
        let request = self.client.get(&self.endpoint).query(query).build()?;
        let url = request.url().to_string();

        tracing::debug!("fetching license records: {url}");
        let response = self.client.execute(request).await?.error_for_status()?;
        let body: LookupResponse = response.json().await?;

        Ok(LookupOutcome {
            url,
            records: body.musen.unwrap_or_default(),
        })
    }
}
