//! Parser for license spec text (`detailInfo.radioSpec1` of a fetched
//! license record).
//!
//! The text is a loosely formatted Japanese fragment describing one or two
//! transmitters. Parsing is two-phase: locate the anchor-delimited power
//! segments, then extract watt values within them. A single text can cover a
//! primary and a reserve transmitter on the same frequency, or concatenate
//! two independent frequency records; [`parse_spec`] resolves both shapes.

mod scan;
mod segments;
mod units;

pub use scan::extract_watts;

use crate::domain::model::LicenseSpec;
use scan::{leading_delimiters, scan_decimal};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no frequency found in spec text")]
    NoFrequencyFound,

    #[error("unparseable spec header")]
    UnparseableHeader,

    #[error("unparseable spec body: {0}")]
    UnparseableBody(String),

    #[error("cannot disambiguate candidates: {tpos} TPO value(s) vs {erps} ERP value(s)")]
    CandidateCountMismatch { tpos: usize, erps: usize },
}

const MEGAHERTZ: &str = "MHz";

/// One split into two frequency records is expected; deeper nesting is
/// unsupported and fails loudly.
const MAX_SPLIT_DEPTH: usize = 1;

/// Parses one license spec text into structured values.
///
/// `is_reserve` selects the reserve transmitter's values when the text covers
/// both a primary and a reserve unit. Pure and deterministic; `text` is never
/// mutated or retained.
pub fn parse_spec(text: &str, is_reserve: bool) -> Result<LicenseSpec, ParseError> {
    parse_fragment(text, is_reserve, 0)
}

fn parse_fragment(text: &str, is_reserve: bool, depth: usize) -> Result<LicenseSpec, ParseError> {
    let mhz_count = text.matches(MEGAHERTZ).count();
    if mhz_count == 0 {
        return Err(ParseError::NoFrequencyFound);
    }

    let (method, freq_mhz) = parse_header(text).ok_or(ParseError::UnparseableHeader)?;
    let freq = freq_mhz * 1e6;

    if mhz_count == 1 {
        let segments = segments::locate(text)
            .ok_or_else(|| ParseError::UnparseableBody("power segments not found".into()))?;
        let tpos = extract_watts(segments.tpo);
        let erps = extract_watts(segments.erp);
        let index = usize::from(is_reserve);
        let pick = |values: &[f64]| {
            values
                .get(index)
                .copied()
                .ok_or(ParseError::CandidateCountMismatch {
                    tpos: tpos.len(),
                    erps: erps.len(),
                })
        };
        // A single-entry list is shared between primary and reserve; with two
        // entries, index 0 is the primary and index 1 the reserve unit.
        let (tpo, erp) = if tpos.len() == 1 {
            (tpos[0], pick(&erps)?)
        } else if erps.len() == 1 {
            (pick(&tpos)?, erps[0])
        } else {
            (pick(&tpos)?, pick(&erps)?)
        };
        Ok(LicenseSpec {
            method,
            freq,
            tpo,
            erp,
        })
    } else {
        // Two frequency records concatenated in one license, separated by the
        // directional-ERP label. Each half is single-frequency on its own.
        if depth >= MAX_SPLIT_DEPTH {
            return Err(ParseError::UnparseableBody(
                "nested multi-frequency record".into(),
            ));
        }
        let fragments: Vec<&str> = text
            .split(segments::DIRECTIONAL_ERP_LABEL)
            .filter(|f| !f.trim().is_empty())
            .collect();
        if fragments.len() != 2 {
            return Err(ParseError::UnparseableBody(format!(
                "expected 2 records after split, found {}",
                fragments.len()
            )));
        }
        let first = parse_fragment(fragments[0], false, depth + 1)?;
        let second = parse_fragment(fragments[1], false, depth + 1)?;
        // The record with the lower ERP is the reserve transmitter.
        if is_reserve {
            Ok(if first.erp > second.erp { second } else { first })
        } else {
            Ok(if first.erp > second.erp { first } else { second })
        }
    }
}

/// Finds the leading `[A-Z0-9]+` method code followed by a delimiter and a
/// megahertz value. A trailing `z` is optional in the unit, as in the source
/// documents.
fn parse_header(text: &str) -> Option<(String, f64)> {
    let mut pos = 0;
    while pos < text.len() {
        let rest = &text[pos..];
        let c = rest.chars().next()?;
        if c.is_ascii_uppercase() || c.is_ascii_digit() {
            if let Some(parsed) = match_header(rest) {
                return Some(parsed);
            }
            let run = rest
                .find(|ch: char| !(ch.is_ascii_uppercase() || ch.is_ascii_digit()))
                .unwrap_or(rest.len());
            pos += run;
        } else {
            pos += c.len_utf8();
        }
    }
    None
}

fn match_header(s: &str) -> Option<(String, f64)> {
    let method_len = s
        .find(|c: char| !(c.is_ascii_uppercase() || c.is_ascii_digit()))
        .unwrap_or(s.len());
    if method_len == 0 {
        return None;
    }
    let after_method = &s[method_len..];
    let delim_len = leading_delimiters(after_method);
    if delim_len == 0 {
        return None;
    }
    let number = &after_method[delim_len..];
    let num_len = scan_decimal(number);
    if num_len == 0 {
        return None;
    }
    let mut unit_at = num_len;
    for c in number[num_len..].chars() {
        if c.is_whitespace() {
            unit_at += c.len_utf8();
        } else {
            break;
        }
    }
    if !number[unit_at..].starts_with("MH") {
        return None;
    }
    let freq: f64 = number[..num_len].parse().ok()?;
    Some((s[..method_len].to_string(), freq))
}
