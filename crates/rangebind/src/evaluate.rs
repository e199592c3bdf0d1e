#![forbid(unsafe_code)]

//! Range classification of a field value against its bounds.
//!
//! One evaluation parses the current value and both bounds, then classifies
//! the value. Boundaries are inclusive: sitting exactly on the minimum is
//! `at_min` and still in range. An absent or unparsable bound disables
//! enforcement for that side only.
//!
//! A value that does not parse compares as zero against the bounds. This
//! mirrors the behavior the engine was ported from and is a known quirk:
//! an empty field with a positive minimum classifies out-of-range, while
//! one whose range spans zero classifies in-range. Hosts that want
//! emptiness handled explicitly use the `empty_is_out_of_range` option,
//! which acts on the target group independently of this classification.

use crate::diagnostics::DiagnosticsSink;
use crate::parse::{NumberMode, RawValue, checked};

/// Outcome of one evaluation. Computed fresh per pass, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RangeResult {
    /// The parsed current value, absent when it did not parse.
    pub value: Option<f64>,
    /// The enforced minimum, absent when missing or unparsable.
    pub min: Option<f64>,
    /// The enforced maximum, absent when missing or unparsable.
    pub max: Option<f64>,
    /// Minimum present and value ≤ minimum.
    pub at_min: bool,
    /// Maximum present and value ≥ maximum.
    pub at_max: bool,
    /// Value strictly outside an enforced bound.
    pub out_of_range: bool,
    /// Complement of `out_of_range`.
    pub in_range: bool,
}

/// Classify `current` against `min`/`max` under `mode`.
///
/// Parse failures are reported through `sink` and the offending value is
/// treated as absent; evaluation always completes.
pub fn evaluate(
    current: &RawValue,
    min: &RawValue,
    max: &RawValue,
    mode: NumberMode,
    sink: &dyn DiagnosticsSink,
) -> RangeResult {
    let value = checked(current, mode, false, sink);
    let min = checked(min, mode, false, sink);
    let max = checked(max, mode, false, sink);

    // Absent values compare as zero.
    let probe = value.unwrap_or(0.0);

    let at_min = min.is_some_and(|m| probe <= m);
    let at_max = max.is_some_and(|m| probe >= m);
    let out_of_range = min.is_some_and(|m| probe < m) || max.is_some_and(|m| probe > m);

    RangeResult {
        value,
        min,
        max,
        at_min,
        at_max,
        out_of_range,
        in_range: !out_of_range,
    }
}
