#![forbid(unsafe_code)]

//! Min/max range binding for numeric input fields.
//!
//! `rangebind` attaches range-validation behavior to a numeric input
//! field: as the field's value crosses its configured bounds, associated
//! control elements are enabled or disabled and a validation message is
//! kept up to date. The engine is host-agnostic — element access and
//! signal delivery go through the [`Host`] trait, so it runs against any
//! UI layer that can read attributes and flip a disabled flag.
//!
//! A field declares its bounds through the `data-min` and `data-max`
//! attributes and must be a plain-text or numeric input. Targets come in
//! three groups: disabled at the minimum, disabled at the maximum, and
//! disabled while out of range. Boundaries are inclusive; sitting exactly
//! on a limit disables that limit's group while the value is still in
//! range.
//!
//! # Example
//!
//! ```ignore
//! use rangebind::{ElementId, RangeBinder, RangeOptions, SignalKind};
//!
//! let mut binder = RangeBinder::new();
//! let ok = binder.setup(
//!     &mut host,
//!     quantity_field,
//!     &RangeOptions::new()
//!         .min_targets(vec![decrement_button])
//!         .max_targets(vec![increment_button])
//!         .out_of_range_targets(vec![submit_button])
//!         .message_target(message_area)
//!         .on_out_of_range(|v| eprintln!("out of range: {v:?}")),
//! );
//! assert!(ok);
//!
//! // The host routes its input signals back in:
//! binder.handle_signal(&mut host, quantity_field, SignalKind::Change);
//! ```
//!
//! Setup is repeatable: a second call on a bound field shallow-merges the
//! new options over the stored configuration (set fields replace
//! wholesale) without re-registering signal hooks. Failures never raise;
//! setup returns `false` and the reasons flow through the injected
//! [`DiagnosticsSink`] (by default, `tracing` warnings).

mod apply;
pub mod binder;
pub mod diagnostics;
pub mod evaluate;
pub mod host;
pub mod options;
pub mod parse;
mod validate;

pub use binder::RangeBinder;
pub use diagnostics::{DiagnosticsSink, Issue, TracingSink};
pub use evaluate::{RangeResult, evaluate};
pub use host::{ElementId, Host, InputKind, MAX_ATTR, MIN_ATTR, MSG_ATTR, SignalKind};
pub use options::{InteractionCallback, RangeConfig, RangeOptions, ValueCallback};
pub use parse::{NumberMode, RawValue};
