#![forbid(unsafe_code)]

//! Pre-binding checks on configuration and field shape.
//!
//! Every check runs and every failure is reported, so one validation pass
//! surfaces all problems at once; the result is the conjunction. Nothing
//! here mutates the host: a failed validation leaves the field and its
//! targets exactly as they were.
//!
//! Two of the ported configuration-shape checks (target lists are
//! sequences, callbacks are callable) are enforced by the type system and
//! have no runtime counterpart; the resolvability of the message target is
//! the shape check that remains.

use crate::diagnostics::{DiagnosticsSink, Issue};
use crate::host::{ElementId, Host, MAX_ATTR, MIN_ATTR};
use crate::options::RangeConfig;
use crate::parse::lexical;

/// Validate `config` against `field`'s live shape.
///
/// With `options_only` set — re-initialization of an already-bound field —
/// the attribute and node checks are skipped, since attribute presence and
/// node shape were accepted when the field was first bound.
pub(crate) fn validate(
    host: &dyn Host,
    field: ElementId,
    config: &RangeConfig,
    options_only: bool,
    sink: &dyn DiagnosticsSink,
) -> bool {
    let mut ok = true;

    // Configuration shape.
    if let Some(target) = config.message_target
        && !host.resolves(target)
    {
        sink.report(Issue::MessageTargetUnresolved { target });
        ok = false;
    }

    if options_only {
        return ok;
    }

    // Attribute and node shape, first initialization only.
    for attr in [MIN_ATTR, MAX_ATTR] {
        // An attribute that is present but empty counts as unset.
        if host.attr(field, attr).as_deref().unwrap_or("").is_empty() {
            sink.report(Issue::MissingBoundAttribute { field, attr });
            ok = false;
        }
    }

    let kind = host.input_kind(field);
    if !kind.is_accepted() {
        sink.report(Issue::UnsupportedInputKind { field, found: kind });
        ok = false;
    }

    // The current value must parse, with an empty field allowed.
    match host.value(field) {
        Some(raw) => {
            if !raw.is_empty() && lexical(&raw, config.number_mode).is_none() {
                sink.report(Issue::InvalidFieldValue { field, raw });
                ok = false;
            }
        }
        None => {
            sink.report(Issue::InvalidFieldValue {
                field,
                raw: String::new(),
            });
            ok = false;
        }
    }

    ok
}
