#![forbid(unsafe_code)]

//! Configuration surface: the incoming overlay and the effective bundle.
//!
//! Setup takes a [`RangeOptions`] overlay in which every field is optional.
//! Merging is shallow and wholesale: a set field replaces the stored value
//! outright (target lists and callbacks are never concatenated or chained).
//! On first initialization the overlay merges over [`RangeConfig::default`];
//! on re-initialization it merges over the field's stored effective
//! configuration, incoming wins.
//!
//! Callbacks are `Rc`-shared single-threaded closures, invoked with the
//! parsed current value (`None` when the value did not parse). The
//! first-interaction callback takes no arguments.

use core::fmt;
use std::rc::Rc;

use crate::host::ElementId;
use crate::parse::NumberMode;

/// Callback receiving the parsed current value of the field.
pub type ValueCallback = Rc<dyn Fn(Option<f64>)>;

/// Callback fired once on the first interaction after initialization.
pub type InteractionCallback = Rc<dyn Fn()>;

/// Partial configuration overlay passed to setup. Unset fields keep
/// whatever the merge base holds.
#[derive(Clone, Default)]
pub struct RangeOptions {
    /// Targets disabled while the field sits at its minimum.
    pub min_targets: Option<Vec<ElementId>>,
    /// Targets disabled while the field sits at its maximum.
    pub max_targets: Option<Vec<ElementId>>,
    /// Targets disabled while the field is out of range.
    pub out_of_range_targets: Option<Vec<ElementId>>,
    /// Fired when the value is at (or under) the minimum.
    pub on_min: Option<ValueCallback>,
    /// Fired when the value is at (or over) the maximum.
    pub on_max: Option<ValueCallback>,
    /// Fired when the value is within range.
    pub on_in_range: Option<ValueCallback>,
    /// Fired when the value is out of range.
    pub on_out_of_range: Option<ValueCallback>,
    /// Fired on the first monitored signal after initialization.
    pub on_first_interaction: Option<InteractionCallback>,
    /// Integer or float interpretation of values and bounds.
    pub number_mode: Option<NumberMode>,
    /// Treat an empty field as out of range for the out-of-range targets.
    pub empty_is_out_of_range: Option<bool>,
    /// Element receiving the validation message text.
    pub message_target: Option<ElementId>,
    /// Value written into the field on first initialization.
    pub preset_value: Option<f64>,
}

impl RangeOptions {
    /// Empty overlay; merging it changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the min-limit target group.
    #[must_use]
    pub fn min_targets(mut self, targets: impl Into<Vec<ElementId>>) -> Self {
        self.min_targets = Some(targets.into());
        self
    }

    /// Set the max-limit target group.
    #[must_use]
    pub fn max_targets(mut self, targets: impl Into<Vec<ElementId>>) -> Self {
        self.max_targets = Some(targets.into());
        self
    }

    /// Set the out-of-range target group.
    #[must_use]
    pub fn out_of_range_targets(mut self, targets: impl Into<Vec<ElementId>>) -> Self {
        self.out_of_range_targets = Some(targets.into());
        self
    }

    /// Set the at-minimum callback.
    #[must_use]
    pub fn on_min(mut self, callback: impl Fn(Option<f64>) + 'static) -> Self {
        self.on_min = Some(Rc::new(callback));
        self
    }

    /// Set the at-maximum callback.
    #[must_use]
    pub fn on_max(mut self, callback: impl Fn(Option<f64>) + 'static) -> Self {
        self.on_max = Some(Rc::new(callback));
        self
    }

    /// Set the in-range callback.
    #[must_use]
    pub fn on_in_range(mut self, callback: impl Fn(Option<f64>) + 'static) -> Self {
        self.on_in_range = Some(Rc::new(callback));
        self
    }

    /// Set the out-of-range callback.
    #[must_use]
    pub fn on_out_of_range(mut self, callback: impl Fn(Option<f64>) + 'static) -> Self {
        self.on_out_of_range = Some(Rc::new(callback));
        self
    }

    /// Set the first-interaction callback.
    #[must_use]
    pub fn on_first_interaction(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_first_interaction = Some(Rc::new(callback));
        self
    }

    /// Choose integer or float interpretation.
    #[must_use]
    pub fn number_mode(mut self, mode: NumberMode) -> Self {
        self.number_mode = Some(mode);
        self
    }

    /// Choose whether an empty field counts as out of range.
    #[must_use]
    pub fn empty_is_out_of_range(mut self, yes: bool) -> Self {
        self.empty_is_out_of_range = Some(yes);
        self
    }

    /// Set the message element.
    #[must_use]
    pub fn message_target(mut self, target: ElementId) -> Self {
        self.message_target = Some(target);
        self
    }

    /// Preset the field's value on first initialization.
    #[must_use]
    pub fn preset_value(mut self, value: f64) -> Self {
        self.preset_value = Some(value);
        self
    }
}

impl fmt::Debug for RangeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeOptions")
            .field("min_targets", &self.min_targets)
            .field("max_targets", &self.max_targets)
            .field("out_of_range_targets", &self.out_of_range_targets)
            .field("on_min", &self.on_min.is_some())
            .field("on_max", &self.on_max.is_some())
            .field("on_in_range", &self.on_in_range.is_some())
            .field("on_out_of_range", &self.on_out_of_range.is_some())
            .field("on_first_interaction", &self.on_first_interaction.is_some())
            .field("number_mode", &self.number_mode)
            .field("empty_is_out_of_range", &self.empty_is_out_of_range)
            .field("message_target", &self.message_target)
            .field("preset_value", &self.preset_value)
            .finish()
    }
}

/// The effective configuration governing one bound field.
#[derive(Clone)]
pub struct RangeConfig {
    pub min_targets: Vec<ElementId>,
    pub max_targets: Vec<ElementId>,
    pub out_of_range_targets: Vec<ElementId>,
    pub on_min: Option<ValueCallback>,
    pub on_max: Option<ValueCallback>,
    pub on_in_range: Option<ValueCallback>,
    pub on_out_of_range: Option<ValueCallback>,
    pub on_first_interaction: Option<InteractionCallback>,
    pub number_mode: NumberMode,
    pub empty_is_out_of_range: bool,
    pub message_target: Option<ElementId>,
    pub preset_value: Option<f64>,
}

impl Default for RangeConfig {
    /// The documented defaults: empty target groups, no callbacks, integer
    /// mode, empty counts as out of range, no message element, no preset.
    fn default() -> Self {
        Self {
            min_targets: Vec::new(),
            max_targets: Vec::new(),
            out_of_range_targets: Vec::new(),
            on_min: None,
            on_max: None,
            on_in_range: None,
            on_out_of_range: None,
            on_first_interaction: None,
            number_mode: NumberMode::Integer,
            empty_is_out_of_range: true,
            message_target: None,
            preset_value: None,
        }
    }
}

impl RangeConfig {
    /// Shallow-merge `overlay` on top of `self`. Set overlay fields replace
    /// the stored value wholesale; unset fields are kept.
    #[must_use]
    pub fn merged(&self, overlay: &RangeOptions) -> Self {
        let base = self.clone();
        Self {
            min_targets: overlay.min_targets.clone().unwrap_or(base.min_targets),
            max_targets: overlay.max_targets.clone().unwrap_or(base.max_targets),
            out_of_range_targets: overlay
                .out_of_range_targets
                .clone()
                .unwrap_or(base.out_of_range_targets),
            on_min: overlay.on_min.clone().or(base.on_min),
            on_max: overlay.on_max.clone().or(base.on_max),
            on_in_range: overlay.on_in_range.clone().or(base.on_in_range),
            on_out_of_range: overlay.on_out_of_range.clone().or(base.on_out_of_range),
            on_first_interaction: overlay
                .on_first_interaction
                .clone()
                .or(base.on_first_interaction),
            number_mode: overlay.number_mode.unwrap_or(base.number_mode),
            empty_is_out_of_range: overlay
                .empty_is_out_of_range
                .unwrap_or(base.empty_is_out_of_range),
            message_target: overlay.message_target.or(base.message_target),
            preset_value: overlay.preset_value.or(base.preset_value),
        }
    }
}

impl fmt::Debug for RangeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeConfig")
            .field("min_targets", &self.min_targets)
            .field("max_targets", &self.max_targets)
            .field("out_of_range_targets", &self.out_of_range_targets)
            .field("on_min", &self.on_min.is_some())
            .field("on_max", &self.on_max.is_some())
            .field("on_in_range", &self.on_in_range.is_some())
            .field("on_out_of_range", &self.on_out_of_range.is_some())
            .field("on_first_interaction", &self.on_first_interaction.is_some())
            .field("number_mode", &self.number_mode)
            .field("empty_is_out_of_range", &self.empty_is_out_of_range)
            .field("message_target", &self.message_target)
            .field("preset_value", &self.preset_value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_surface() {
        let config = RangeConfig::default();
        assert!(config.min_targets.is_empty());
        assert!(config.max_targets.is_empty());
        assert!(config.out_of_range_targets.is_empty());
        assert!(config.on_min.is_none());
        assert!(config.on_first_interaction.is_none());
        assert_eq!(config.number_mode, NumberMode::Integer);
        assert!(config.empty_is_out_of_range);
        assert!(config.message_target.is_none());
        assert!(config.preset_value.is_none());
    }

    #[test]
    fn merge_replaces_set_fields_wholesale() {
        let base = RangeConfig::default().merged(
            &RangeOptions::new()
                .min_targets(vec![ElementId(1), ElementId(2)])
                .empty_is_out_of_range(false),
        );
        let merged = base.merged(&RangeOptions::new().min_targets(vec![ElementId(9)]));

        // Replaced outright, not concatenated.
        assert_eq!(merged.min_targets, vec![ElementId(9)]);
        // Untouched fields keep the base value.
        assert!(!merged.empty_is_out_of_range);
        assert_eq!(merged.number_mode, NumberMode::Integer);
    }

    #[test]
    fn merge_keeps_callbacks_unless_overridden() {
        let base = RangeConfig::default().merged(&RangeOptions::new().on_min(|_| {}));
        assert!(base.on_min.is_some());

        let merged = base.merged(&RangeOptions::new().on_max(|_| {}));
        assert!(merged.on_min.is_some());
        assert!(merged.on_max.is_some());
    }

    #[test]
    fn empty_overlay_is_identity() {
        let base = RangeConfig::default().merged(
            &RangeOptions::new()
                .message_target(ElementId(7))
                .number_mode(NumberMode::Float),
        );
        let merged = base.merged(&RangeOptions::new());
        assert_eq!(merged.message_target, Some(ElementId(7)));
        assert_eq!(merged.number_mode, NumberMode::Float);
    }
}
