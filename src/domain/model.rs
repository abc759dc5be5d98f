use crate::utils::error::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Structured values parsed from one license spec text. Produced fresh per
/// parse call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseSpec {
    /// Modulation/service code, e.g. `FM`.
    pub method: String,
    /// Carrier frequency in hertz.
    pub freq: f64,
    /// Transmitter output power in watts.
    pub tpo: f64,
    /// Effective radiated power in watts.
    pub erp: f64,
}

/// The locally maintained station registry (`stations.json`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRegistry {
    pub radio_stations: Vec<RadioStation>,
    pub addresses: HashMap<String, AddressEntry>,
}

impl StationRegistry {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }
}

/// One broadcaster with its studio and transmitter stations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioStation {
    pub nickname: String,
    #[serde(default)]
    pub attributes: Vec<String>,
    pub studio: Studio,
    pub stations: Vec<Station>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Studio {
    pub address_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Carrier frequency in hertz.
    pub frequency: f64,
    /// Transmitter output power in watts.
    pub tpo: f64,
    /// Effective radiated power in watts.
    pub erp: f64,
    #[serde(rename = "type")]
    pub station_type: StationType,
    pub address_id: String,
    #[serde(default)]
    pub citations: Vec<String>,
}

/// Operational role of a transmitter. A reserve unit is a backup sharing a
/// license record with its primary counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationType {
    Primary,
    Relay,
    Reserve,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressEntry {
    pub address: Address,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    pub prefecture: String,
    pub city: String,
}

/// One license record from the lookup response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRecord {
    pub list_info: ListInfo,
    pub detail_info: DetailInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListInfo {
    pub tdfk_cd: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetailInfo {
    #[serde(rename = "radioSpec1")]
    pub radio_spec1: String,
    // the lookup API misspells "Equipment" in its field name
    #[serde(rename = "radioEuipmentLocation")]
    pub radio_equipment_location: String,
}

/// Envelope of the list endpoint. `musen` is absent when no license matches
/// the query.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupResponse {
    pub musen: Option<Vec<LicenseRecord>>,
}
