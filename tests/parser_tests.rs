use musen_check::parser::{extract_watts, parse_spec, ParseError};
use musen_check::LicenseSpec;

// One frequency, two transmitter-power and two radiated-power values: the
// license covers a primary and a reserve unit at the same frequency.
const TWO_UNIT_SPEC: &str =
    "FM\t82.5MHz\t\t1kW\n\t\t500W\n\t\t最大実効輻射電力\t\t800W\n\t\t400W";

// One frequency, the transmitter power is shared between both units.
const SHARED_TPO_SPEC: &str = "FM\t80.5MHz\t\t3kW\n\t\t実効輻射電力\t\t5kW\n\t\t2.5kW";

// One frequency, the radiated power is shared between both units.
const SHARED_ERP_SPEC: &str = "FM\t78.0MHz\t\t1kW\n\t\t100W\n\t\t実効輻射電力\t\t1.5kW";

// Two frequency records concatenated in one license text.
const DUAL_RECORD_SPEC: &str = "FM\t90.0MHz\t\t5kW\n\t\t実効輻射電力\t\t11kW\n\t\t\
                                方向別実効ふく射電力\n\
                                FM\t92.0MHz\t\t1kW\n\t\t実効輻射電力\t\t2.5kW";

#[test]
fn test_primary_takes_first_values() {
    assert_eq!(
        parse_spec(TWO_UNIT_SPEC, false).unwrap(),
        LicenseSpec {
            method: "FM".into(),
            freq: 82_500_000.0,
            tpo: 1_000.0,
            erp: 800.0,
        }
    );
}

#[test]
fn test_reserve_takes_second_values() {
    assert_eq!(
        parse_spec(TWO_UNIT_SPEC, true).unwrap(),
        LicenseSpec {
            method: "FM".into(),
            freq: 82_500_000.0,
            tpo: 500.0,
            erp: 400.0,
        }
    );
}

#[test]
fn test_single_tpo_is_shared_between_units() {
    let primary = parse_spec(SHARED_TPO_SPEC, false).unwrap();
    let reserve = parse_spec(SHARED_TPO_SPEC, true).unwrap();
    assert_eq!(primary.tpo, 3_000.0);
    assert_eq!(reserve.tpo, 3_000.0);
    assert_eq!(primary.erp, 5_000.0);
    assert_eq!(reserve.erp, 2_500.0);
}

#[test]
fn test_single_erp_is_shared_between_units() {
    let primary = parse_spec(SHARED_ERP_SPEC, false).unwrap();
    let reserve = parse_spec(SHARED_ERP_SPEC, true).unwrap();
    assert_eq!(primary.tpo, 1_000.0);
    assert_eq!(reserve.tpo, 100.0);
    assert_eq!(primary.erp, 1_500.0);
    assert_eq!(reserve.erp, 1_500.0);
}

#[test]
fn test_single_valued_lists_cannot_disambiguate_a_reserve_unit() {
    let text = "FM\t76.5MHz\t\t100W\n\t\t実効輻射電力\t\t140W";
    assert!(parse_spec(text, false).is_ok());
    assert_eq!(
        parse_spec(text, true),
        Err(ParseError::CandidateCountMismatch { tpos: 1, erps: 1 })
    );
}

#[test]
fn test_dual_record_primary_has_higher_erp() {
    let primary = parse_spec(DUAL_RECORD_SPEC, false).unwrap();
    assert_eq!(primary.freq, 90_000_000.0);
    assert_eq!(primary.tpo, 5_000.0);
    assert_eq!(primary.erp, 11_000.0);
}

#[test]
fn test_dual_record_reserve_has_lower_erp() {
    let reserve = parse_spec(DUAL_RECORD_SPEC, true).unwrap();
    assert_eq!(reserve.freq, 92_000_000.0);
    assert_eq!(reserve.tpo, 1_000.0);
    assert_eq!(reserve.erp, 2_500.0);
}

#[test]
fn test_nested_dual_record_fails_loudly() {
    // Three frequencies but only one separator label: the second half is
    // still dual-frequency after the split and must not recurse further.
    let text = "FM\t90.0MHz\t\t5kW\n\t\t実効輻射電力\t\t11kW\n\t\t\
                方向別実効ふく射電力\n\
                FM\t92.0MHz\t\t1kW\n\t\t実効輻射電力\t\t2.5kW\n\
                FM\t93.0MHz\t\t1kW\n\t\t実効輻射電力\t\t2.5kW";
    assert!(matches!(
        parse_spec(text, false),
        Err(ParseError::UnparseableBody(_))
    ));
}

#[test]
fn test_literal_escape_delimiters() {
    // Fetched records carry the escapes verbatim instead of control chars.
    let text = "FM\\t83.5MHz\\t\\t1kW\\n \\t \\t実効輻射電力\\t\\t2.5kW";
    assert_eq!(
        parse_spec(text, false).unwrap(),
        LicenseSpec {
            method: "FM".into(),
            freq: 83_500_000.0,
            tpo: 1_000.0,
            erp: 2_500.0,
        }
    );
}

#[test]
fn test_missing_frequency_is_an_error_not_a_zero_spec() {
    assert_eq!(
        parse_spec("FM\t82.5kHz\t\t1kW", false),
        Err(ParseError::NoFrequencyFound)
    );
    assert_eq!(parse_spec("工事中", true), Err(ParseError::NoFrequencyFound));
}

#[test]
fn test_missing_method_header_fails() {
    let text = "テレビ\t82.5MHz\t\t1kW\n\t\t実効輻射電力\t\t800W";
    assert_eq!(parse_spec(text, false), Err(ParseError::UnparseableHeader));
}

#[test]
fn test_missing_power_segments_fail() {
    assert!(matches!(
        parse_spec("FM\t82.5MHz\t\t1kW", false),
        Err(ParseError::UnparseableBody(_))
    ));
}

#[test]
fn test_extraction_normalizes_units_in_document_order() {
    assert_eq!(extract_watts("5kW"), vec![5_000.0]);
    assert_eq!(extract_watts("500mW"), vec![0.5]);
    assert_eq!(extract_watts("10W"), vec![10.0]);
    assert_eq!(
        extract_watts("1kW\n\t\t500W\n\t\t800mW"),
        vec![1_000.0, 500.0, 0.8]
    );
}
