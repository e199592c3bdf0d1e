#![forbid(unsafe_code)]

//! Per-field lifecycle: setup, re-setup, and signal-driven re-evaluation.
//!
//! [`RangeBinder`] owns the mapping from field identity to binding state;
//! nothing is attached to the host's elements. A field is bound by
//! [`setup`](RangeBinder::setup) and stays bound for the binder's lifetime.
//!
//! # Lifecycle
//!
//! First `setup` on a field merges the incoming options over the documented
//! defaults, runs the full validation (configuration shape plus attribute
//! and node shape), applies the optional preset value, runs one
//! evaluate-and-apply pass so the initial UI state reflects the current
//! value, and registers the three interaction subscriptions. Later `setup`
//! calls merge over the stored effective configuration and re-check
//! configuration shape only — they never resubscribe and never re-validate
//! attributes. A failed validation aborts the call with prior state (and
//! the host) untouched.
//!
//! Signals reach the binder through
//! [`handle_signal`](RangeBinder::handle_signal); the first one after
//! initialization fires the first-interaction callback exactly once, then
//! every signal triggers one synchronous pass over the live value and
//! attributes.

use std::rc::Rc;

use ahash::AHashMap;

use crate::apply::apply;
use crate::diagnostics::{DiagnosticsSink, TracingSink};
use crate::evaluate::evaluate;
use crate::host::{ElementId, Host, MAX_ATTR, MIN_ATTR, SignalKind};
use crate::options::{RangeConfig, RangeOptions};
use crate::parse::{NumberMode, RawValue, format_number};
use crate::validate::validate;

/// Binding state for one field.
#[derive(Clone)]
struct FieldState {
    config: RangeConfig,
    interacted: bool,
}

/// Owns every field binding and drives their evaluation passes.
pub struct RangeBinder {
    fields: AHashMap<ElementId, FieldState>,
    sink: Rc<dyn DiagnosticsSink>,
}

impl Default for RangeBinder {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeBinder {
    /// Binder reporting diagnostics through `tracing`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_diagnostics(Rc::new(TracingSink))
    }

    /// Binder reporting diagnostics through an injected sink.
    #[must_use]
    pub fn with_diagnostics(sink: Rc<dyn DiagnosticsSink>) -> Self {
        Self {
            fields: AHashMap::new(),
            sink,
        }
    }

    /// Whether `field` is currently bound.
    #[must_use]
    pub fn is_bound(&self, field: ElementId) -> bool {
        self.fields.contains_key(&field)
    }

    /// Bind `field`, or re-configure it if already bound.
    ///
    /// Returns `false` — reporting the reasons through the diagnostics
    /// sink — when validation rejects the merged configuration; the field,
    /// its targets, and any prior binding are left untouched.
    pub fn setup(&mut self, host: &mut dyn Host, field: ElementId, options: &RangeOptions) -> bool {
        let bound = self.fields.get(&field);
        let merged = match bound {
            Some(state) => state.config.merged(options),
            None => RangeConfig::default().merged(options),
        };
        let rebinding = bound.is_some();

        if !validate(host, field, &merged, rebinding, self.sink.as_ref()) {
            return false;
        }

        if !rebinding && let Some(preset) = merged.preset_value {
            let normalized = match merged.number_mode {
                NumberMode::Integer => preset.round(),
                NumberMode::Float => preset,
            };
            host.set_value(field, &format_number(normalized));
        }

        let interacted = bound.is_some_and(|state| state.interacted);
        self.fields.insert(
            field,
            FieldState {
                config: merged.clone(),
                interacted,
            },
        );

        self.run_pass(host, field, &merged);

        if !rebinding {
            for signal in SignalKind::ALL {
                host.subscribe(field, signal);
            }
        }

        true
    }

    /// Bind several fields with one shared set of options.
    ///
    /// Each field is set up independently; returns true iff every field
    /// succeeded.
    pub fn setup_all(
        &mut self,
        host: &mut dyn Host,
        fields: &[ElementId],
        options: &RangeOptions,
    ) -> bool {
        let mut all = true;
        for &field in fields {
            all &= self.setup(host, field, options);
        }
        all
    }

    /// Deliver one interaction signal for `field`.
    ///
    /// Signals for unbound fields are ignored. The first signal after
    /// initialization fires the first-interaction callback, then every
    /// signal re-runs one evaluate-and-apply pass against the live value
    /// and attributes under the stored effective configuration.
    pub fn handle_signal(&mut self, host: &mut dyn Host, field: ElementId, signal: SignalKind) {
        let Some(state) = self.fields.get_mut(&field) else {
            return;
        };
        tracing::trace!(?signal, field = field.0, "interaction signal");

        if !state.interacted {
            state.interacted = true;
            if let Some(callback) = state.config.on_first_interaction.clone() {
                callback();
            }
        }

        let config = state.config.clone();
        self.run_pass(host, field, &config);
    }

    fn run_pass(&self, host: &mut dyn Host, field: ElementId, config: &RangeConfig) {
        let current = RawValue::from_host(host.value(field));
        let min = RawValue::from_host(host.attr(field, MIN_ATTR));
        let max = RawValue::from_host(host.attr(field, MAX_ATTR));

        let result = evaluate(&current, &min, &max, config.number_mode, self.sink.as_ref());
        apply(host, field, config, &result);
    }
}
