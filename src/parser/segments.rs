//! Anchor-based segment location within one license spec text.
//!
//! The label phrases are the only reliable anchors in the free-form text; the
//! watt values carry no positional label of their own, only their order
//! relative to these anchors.

use super::scan::{delimiters_only, power_tokens};

/// Effective radiated power label; marks the end of the transmitter-power run.
pub(crate) const ERP_LABEL: &str = "実効輻射電力";

/// Optional qualifier in front of the ERP label ("maximum"); some licenses
/// carry it, some do not, both wordings are equivalent.
pub(crate) const MAX_QUALIFIER: &str = "最大";

/// Directional ERP label. Informational at the end of a single record, and
/// the separator when one license concatenates two frequency records.
pub(crate) const DIRECTIONAL_ERP_LABEL: &str = "方向別実効ふく射電力";

pub(crate) struct Segments<'a> {
    /// Run of transmitter output power values, ending at the ERP label.
    pub tpo: &'a str,
    /// Trailing run of effective radiated power values.
    pub erp: &'a str,
}

/// Locates the transmitter-power and radiated-power runs around the ERP label
/// anchor. `None` means the text does not follow the license layout; callers
/// must treat that as a parse failure, never as an empty result.
pub(crate) fn locate(text: &str) -> Option<Segments<'_>> {
    let label_at = text.find(ERP_LABEL)?;
    let label_end = label_at + ERP_LABEL.len();
    let anchor = if text[..label_at].ends_with(MAX_QUALIFIER) {
        label_at - MAX_QUALIFIER.len()
    } else {
        label_at
    };

    let tokens = power_tokens(text);

    // Transmitter power: the run of tokens separated by delimiters only and
    // immediately adjacent to the anchor.
    let before: Vec<_> = tokens.iter().filter(|t| t.end <= anchor).collect();
    let last = before
        .iter()
        .rposition(|t| delimiters_only(&text[t.end..anchor]))?;
    let mut first = last;
    while first > 0 && delimiters_only(&text[before[first - 1].end..before[first].start]) {
        first -= 1;
    }
    let tpo = &text[before[first].start..anchor];

    // Radiated power: the trailing run after the anchor, optionally closed by
    // the directional-ERP label.
    let erp_end = {
        let stripped = rstrip_delimiters(text, text.len());
        if text[..stripped].ends_with(DIRECTIONAL_ERP_LABEL) {
            rstrip_delimiters(text, stripped - DIRECTIONAL_ERP_LABEL.len())
        } else {
            stripped
        }
    };
    let after: Vec<_> = tokens
        .iter()
        .filter(|t| t.start >= label_end && t.end <= erp_end)
        .collect();
    let last = after
        .iter()
        .rposition(|t| delimiters_only(&text[t.end..erp_end]))?;
    let mut first = last;
    while first > 0 && delimiters_only(&text[after[first - 1].end..after[first].start]) {
        first -= 1;
    }
    let erp = &text[after[first].start..erp_end];

    Some(Segments { tpo, erp })
}

fn rstrip_delimiters(text: &str, mut end: usize) -> usize {
    loop {
        let s = &text[..end];
        let Some(c) = s.chars().next_back() else { return end };
        if c.is_whitespace() {
            end -= c.len_utf8();
        } else if (c == 'n' || c == 't') && s[..end - 1].ends_with('\\') {
            end -= 2;
        } else {
            return end;
        }
    }
}
