/// Multiplier to canonical watts for a power unit token.
///
/// The license texts only ever use `W`, `kW` and `mW`; anything else falls
/// back to plain watts rather than failing, matching how the documents are
/// read in practice.
pub(crate) fn unit_multiplier(unit: &str) -> f64 {
    match unit {
        "kW" => 1_000.0,
        "mW" => 0.001,
        _ => 1.0,
    }
}
