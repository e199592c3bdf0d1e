#![forbid(unsafe_code)]

//! The seam between the binding engine and the embedding UI layer.
//!
//! The engine never touches the host's element tree directly. Everything it
//! needs — reading a field's value and attributes, toggling a target's
//! disabled state, writing message text, wiring interaction signals — goes
//! through the [`Host`] trait, keyed by opaque [`ElementId`]s the embedder
//! hands out.
//!
//! # Invariants
//!
//! 1. An `ElementId` is stable for the lifetime of the element it names;
//!    the engine stores ids across passes and expects them to keep
//!    resolving to the same element.
//! 2. `subscribe` is additive: the engine calls it at most once per
//!    `(field, signal)` pair and relies on the host to deliver every
//!    matching signal back through
//!    [`RangeBinder::handle_signal`](crate::binder::RangeBinder::handle_signal).
//! 3. Writes to unknown ids must be ignored by the host, not panic.

/// Opaque identity of a host UI element.
///
/// The embedder chooses the numbering; the engine only compares and hashes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// The kind of input control a field id resolves to.
///
/// Range binding accepts plain text entry and numeric entry; everything
/// else fails setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// Plain text entry.
    Text,
    /// Numeric entry.
    Number,
    /// Any other control (or not an input at all).
    Other,
}

impl InputKind {
    /// Whether range binding accepts this control kind.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, InputKind::Text | InputKind::Number)
    }
}

/// An interaction signal the host delivers for a bound field.
///
/// The three kinds are subscribed independently; a combined subscription
/// would silently drop signals on hosts that match signal names exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignalKind {
    /// The field received focus.
    Focus,
    /// The field's value was committed.
    Change,
    /// Key activity while the field is focused.
    Key,
}

impl SignalKind {
    /// Every signal kind the engine subscribes to, in registration order.
    pub const ALL: [SignalKind; 3] = [SignalKind::Focus, SignalKind::Change, SignalKind::Key];
}

/// Attribute holding a field's minimum bound. Mandatory on first setup.
pub const MIN_ATTR: &str = "data-min";

/// Attribute holding a field's maximum bound. Mandatory on first setup.
pub const MAX_ATTR: &str = "data-max";

/// Optional message-template attribute, read from the message element.
/// `|min|` and `|max|` placeholders are substituted with the bounds.
pub const MSG_ATTR: &str = "data-msg";

/// Host-side element access.
///
/// All methods are synchronous; the engine performs one evaluate-and-apply
/// pass to completion per call into it, so the host never sees overlapping
/// passes for a field.
pub trait Host {
    /// The control kind of `field`.
    fn input_kind(&self, field: ElementId) -> InputKind;

    /// The field's current raw value, or `None` if `field` does not
    /// resolve to a value-bearing element.
    fn value(&self, field: ElementId) -> Option<String>;

    /// Overwrite the field's value.
    fn set_value(&mut self, field: ElementId, value: &str);

    /// Read an attribute off an element.
    fn attr(&self, element: ElementId, name: &str) -> Option<String>;

    /// Whether `element` resolves to at least one element.
    fn resolves(&self, element: ElementId) -> bool;

    /// Set or clear the disabled state of a target element.
    fn set_disabled(&mut self, element: ElementId, disabled: bool);

    /// Replace an element's text content.
    fn set_text(&mut self, element: ElementId, text: &str);

    /// Register interest in `signal` for `field`. Called at most once per
    /// pair; the host routes matching signals back to the engine.
    fn subscribe(&mut self, field: ElementId, signal: SignalKind);
}
