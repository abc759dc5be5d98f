//! Reconciliation driver: walks the registry in order and checks each
//! station's recorded values against the license records fetched for it.

use crate::check::query;
use crate::domain::model::{
    LicenseRecord, RadioStation, Station, StationRegistry, StationType,
};
use crate::domain::ports::{LicenseLookup, ReportSink};
use crate::parser::parse_spec;

/// Reserve transmitter site marker in the equipment-location text.
const RESERVE_SITE: &str = "予備送信所";
/// Transmitter site marker.
const SITE: &str = "送信所";

pub struct Reconciler<L: LicenseLookup> {
    lookup: L,
}

impl<L: LicenseLookup> Reconciler<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Checks every station, one blocking lookup at a time, in registry
    /// order. Findings go to the sink; failures are isolated per station.
    pub async fn run(&self, registry: &StationRegistry, sink: &mut dyn ReportSink) {
        for broadcaster in &registry.radio_stations {
            sink.info(broadcaster.nickname.clone());
            for station in &broadcaster.stations {
                self.check_station(registry, broadcaster, station, sink).await;
            }
        }
    }

    async fn check_station(
        &self,
        registry: &StationRegistry,
        broadcaster: &RadioStation,
        station: &Station,
        sink: &mut dyn ReportSink,
    ) {
        let tag = format!("{}/{}", broadcaster.nickname, station.address_id);

        let Some(citation) = station
            .citations
            .iter()
            .find(|c| c.starts_with(query::LICENSE_URL_PREFIX))
        else {
            sink.warn(format!("{tag} has no license URL."));
            return;
        };
        let Some(entry) = registry.addresses.get(&station.address_id) else {
            sink.warn(format!("{tag} is used, but not defined."));
            return;
        };
        let Some(region) = query::region_code(citation) else {
            sink.warn(format!("{tag}: citation URL has no IT region code. {citation}"));
            return;
        };
        let Some(params) = query::build_query(broadcaster, station, &entry.address, &region)
        else {
            sink.warn(format!(
                "{tag}: unknown prefecture '{}'.",
                entry.address.prefecture
            ));
            return;
        };

        let outcome = match self.lookup.fetch(&params).await {
            Ok(outcome) => outcome,
            Err(e) => {
                sink.warn(format!("{tag}: lookup failed: {e}"));
                return;
            }
        };
        if outcome.records.is_empty() {
            sink.warn(format!("{tag}: spec is not found. {}", outcome.url));
            return;
        }

        let location_city = format!("{}{}", entry.address.prefecture, entry.address.city);
        let candidates: Vec<&LicenseRecord> = outcome
            .records
            .iter()
            .filter(|record| is_candidate(record, station.station_type, &location_city))
            .collect();
        if candidates.is_empty() {
            sink.warn(format!(
                "{tag}: spec is not found. wrong address?: local={location_city} {}",
                outcome.url
            ));
            return;
        }

        let is_reserve = station.station_type == StationType::Reserve;
        let mut specs = Vec::with_capacity(candidates.len());
        for record in &candidates {
            match parse_spec(&record.detail_info.radio_spec1, is_reserve) {
                Ok(spec) => specs.push(spec),
                Err(e) => {
                    sink.warn(format!("{tag}: unparseable spec: {e} {}", outcome.url));
                    return;
                }
            }
        }

        let matched = specs.iter().any(|spec| {
            spec.freq == station.frequency
                && spec.tpo == station.tpo
                && spec.erp == station.erp
        });
        if matched {
            return;
        }

        // No exact match: report each differing field against the first
        // candidate spec.
        let spec = &specs[0];
        if spec.freq != station.frequency {
            sink.warn(format!(
                "{tag}: mismatched frequency: local={}, spec={} {}",
                station.frequency / 1e6,
                spec.freq / 1e6,
                outcome.url
            ));
        }
        if spec.tpo != station.tpo {
            sink.warn(format!(
                "{tag}: mismatched TPO: local={}, spec={} {}",
                station.tpo, spec.tpo, outcome.url
            ));
        }
        if spec.erp != station.erp {
            sink.warn(format!(
                "{tag}: mismatched ERP: local={}, spec={} {}",
                station.erp, spec.erp, outcome.url
            ));
        }
    }
}

/// Only records located at the station's city are candidates; reserve-type
/// stations additionally require the reserve transmitter site marker.
fn is_candidate(record: &LicenseRecord, station_type: StationType, location_city: &str) -> bool {
    let location = &record.detail_info.radio_equipment_location;
    match station_type {
        StationType::Reserve => {
            location.contains(RESERVE_SITE) && location.contains(location_city)
        }
        _ => {
            record.list_info.tdfk_cd == location_city
                || (location.contains(SITE) && location.contains(location_city))
        }
    }
}
