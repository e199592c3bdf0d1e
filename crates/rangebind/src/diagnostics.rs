#![forbid(unsafe_code)]

//! Non-fatal diagnostics reporting.
//!
//! Nothing in the engine raises across the API boundary: setup failures
//! surface as a boolean result, and everything worth telling the embedder
//! about flows through an injected [`DiagnosticsSink`]. The default sink
//! forwards to `tracing`, so the engine itself never needs to know whether
//! a console (or any subscriber at all) exists.

use core::fmt;

use crate::host::{ElementId, InputKind};

/// A reportable condition observed during setup or evaluation.
///
/// The first variant is a configuration-shape failure, the middle three are
/// attribute-contract failures checked on first initialization, and
/// [`ParseFailure`](Issue::ParseFailure) is a diagnostic only — evaluation
/// proceeds treating the value as absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Issue {
    /// The configured message target does not resolve to an element.
    MessageTargetUnresolved {
        /// The dangling reference.
        target: ElementId,
    },
    /// A mandatory boundary attribute is missing or empty on the field.
    MissingBoundAttribute {
        /// The field being set up.
        field: ElementId,
        /// `data-min` or `data-max`.
        attr: &'static str,
    },
    /// The field is not one of the accepted input kinds.
    UnsupportedInputKind {
        /// The field being set up.
        field: ElementId,
        /// The kind the host reported.
        found: InputKind,
    },
    /// The field's current value does not parse as a number.
    InvalidFieldValue {
        /// The field being set up.
        field: ElementId,
        /// The raw value as read from the host.
        raw: String,
    },
    /// A value failed numeric parsing during evaluation.
    ParseFailure {
        /// The raw text that did not parse.
        raw: String,
    },
}

impl Issue {
    /// Whether this issue aborts setup (as opposed to a pass-time warning).
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Issue::ParseFailure { .. })
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::MessageTargetUnresolved { target } => {
                write!(f, "message target {target:?} does not resolve to an element")
            }
            Issue::MissingBoundAttribute { field, attr } => {
                write!(f, "no '{attr}' attribute set on field {field:?}")
            }
            Issue::UnsupportedInputKind { field, found } => {
                write!(
                    f,
                    "field {field:?} must be a text or number input, found {found:?}"
                )
            }
            Issue::InvalidFieldValue { field, raw } => {
                write!(f, "field {field:?} value {raw:?} is not a valid number")
            }
            Issue::ParseFailure { raw } => {
                write!(f, "value {raw:?} is not a valid number")
            }
        }
    }
}

/// Receiver for engine diagnostics.
///
/// Implementations must not panic; they are called from inside evaluation
/// passes.
pub trait DiagnosticsSink {
    /// Report one issue. Issues are never deduplicated by the engine.
    fn report(&self, issue: Issue);
}

/// Default sink: forwards every issue to `tracing` at WARN level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn report(&self, issue: Issue) {
        tracing::warn!(%issue, fatal = issue.is_fatal(), "rangebind diagnostic");
    }
}
