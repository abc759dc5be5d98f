//! Local registry checks that need no remote lookup.

use crate::domain::model::{StationRegistry, StationType};
use crate::domain::ports::ReportSink;
use std::collections::BTreeSet;

/// Registry statistics, mirroring the shape of the data file.
pub fn report_stats(registry: &StationRegistry, sink: &mut dyn ReportSink) {
    let stations: Vec<_> = registry
        .radio_stations
        .iter()
        .flat_map(|broadcaster| &broadcaster.stations)
        .collect();
    let count =
        |t: StationType| stations.iter().filter(|s| s.station_type == t).count();

    sink.info("Statistics:".into());
    sink.info(format!(
        "  Radio Station Studios  {}",
        registry.radio_stations.len()
    ));
    sink.info(format!(
        "    Primary Stations     {}",
        count(StationType::Primary)
    ));
    sink.info(format!(
        "    Relay Stations       {}",
        count(StationType::Relay)
    ));
    sink.info(format!(
        "    Reserve Stations     {}",
        count(StationType::Reserve)
    ));
    sink.info(format!("    Stations Total       {}", stations.len()));
    sink.info(format!(
        "  Addresses              {}",
        registry.addresses.len()
    ));
}

/// Address-table integrity: every referenced id must exist and every defined
/// id must be referenced. Violations are warnings, never fatal.
pub fn check_addresses(registry: &StationRegistry, sink: &mut dyn ReportSink) {
    let mut used = BTreeSet::new();
    for broadcaster in &registry.radio_stations {
        used.insert(broadcaster.studio.address_id.as_str());
        for station in &broadcaster.stations {
            used.insert(station.address_id.as_str());
        }
    }

    for id in &used {
        if !registry.addresses.contains_key(*id) {
            sink.warn(format!("'{id}' is used, but not defined."));
        }
    }
    for id in registry.addresses.keys() {
        if !used.contains(id.as_str()) {
            sink.warn(format!("'{id}' is defined, but not used."));
        }
    }
}
