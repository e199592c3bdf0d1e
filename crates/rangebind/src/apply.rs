#![forbid(unsafe_code)]

//! Side-effect pass: push one evaluation outcome out to the host.
//!
//! Applies disabled state to the three target groups, writes the validation
//! message, then fires every callback whose condition holds. The pass is
//! idempotent — identical inputs produce identical writes — and callbacks
//! are re-fired on every pass rather than deduplicated.

use crate::evaluate::RangeResult;
use crate::host::{ElementId, Host, MSG_ATTR};
use crate::options::RangeConfig;
use crate::parse::format_number;

/// Default validation message. The per-element `data-msg` template
/// overrides it when present on the message element.
const DEFAULT_TEMPLATE: &str = "Must be between |min| and |max|.";

/// Substitute `|min|`/`|max|` placeholders; an absent bound substitutes as
/// the empty string.
fn render_message(template: &str, min: Option<f64>, max: Option<f64>) -> String {
    let bound = |b: Option<f64>| b.map(format_number).unwrap_or_default();
    template
        .replace("|min|", &bound(min))
        .replace("|max|", &bound(max))
}

/// Apply `result` to the host: enablement groups, message text, callbacks.
pub(crate) fn apply(
    host: &mut dyn Host,
    field: ElementId,
    config: &RangeConfig,
    result: &RangeResult,
) {
    for target in &config.min_targets {
        host.set_disabled(*target, result.at_min);
    }
    for target in &config.max_targets {
        host.set_disabled(*target, result.at_max);
    }

    let empty = host.value(field).is_some_and(|v| v.is_empty());
    let oor_disabled = result.out_of_range || (config.empty_is_out_of_range && empty);
    for target in &config.out_of_range_targets {
        host.set_disabled(*target, oor_disabled);
    }

    if let Some(target) = config.message_target {
        let template = host.attr(target, MSG_ATTR);
        let text = render_message(
            template.as_deref().unwrap_or(DEFAULT_TEMPLATE),
            result.min,
            result.max,
        );
        host.set_text(target, &text);
    }

    // Callbacks are independent: an at-limit value in range fires both the
    // limit callback and the in-range callback in the same pass.
    if result.out_of_range && let Some(cb) = &config.on_out_of_range {
        cb(result.value);
    }
    if result.in_range && let Some(cb) = &config.on_in_range {
        cb(result.value);
    }
    if result.at_min && let Some(cb) = &config.on_min {
        cb(result.value);
    }
    if result.at_max && let Some(cb) = &config.on_max {
        cb(result.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_substitute_both_bounds() {
        let text = render_message("low=|min|,high=|max|", Some(2.0), Some(9.0));
        assert_eq!(text, "low=2,high=9");
    }

    #[test]
    fn default_template_reads_naturally() {
        let text = render_message(DEFAULT_TEMPLATE, Some(5.0), Some(10.0));
        assert_eq!(text, "Must be between 5 and 10.");
    }

    #[test]
    fn float_bounds_keep_their_fraction() {
        let text = render_message(DEFAULT_TEMPLATE, Some(2.5), Some(9.75));
        assert_eq!(text, "Must be between 2.5 and 9.75.");
    }

    #[test]
    fn absent_bound_substitutes_empty() {
        let text = render_message("min=|min| max=|max|", None, Some(4.0));
        assert_eq!(text, "min= max=4");
    }

    #[test]
    fn repeated_placeholders_all_substitute() {
        let text = render_message("|min|..|max| (|min|)", Some(1.0), Some(3.0));
        assert_eq!(text, "1..3 (1)");
    }
}
