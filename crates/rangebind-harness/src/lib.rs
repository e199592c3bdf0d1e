#![forbid(unsafe_code)]

//! Test harness for `rangebind`: a scripted in-memory [`Host`] plus
//! capture utilities.
//!
//! [`FakeHost`] is a flat element store — kind, value, attributes,
//! disabled flag, text content — with a log of every subscription the
//! engine registers. [`RecordingSink`] captures diagnostics for
//! assertion. [`RangeFixture`] wires the standard scenario (one field,
//! decrement/increment/submit buttons, a message area) so tests can get
//! straight to the behavior under test.

use std::cell::RefCell;
use std::rc::Rc;

use ahash::AHashMap;

use rangebind::{DiagnosticsSink, ElementId, Host, InputKind, Issue, RangeOptions, SignalKind};

#[derive(Clone, Debug)]
struct FakeElement {
    kind: InputKind,
    value: Option<String>,
    attrs: AHashMap<String, String>,
    disabled: Option<bool>,
    text: Option<String>,
}

impl FakeElement {
    fn new(kind: InputKind, value: Option<String>) -> Self {
        Self {
            kind,
            value,
            attrs: AHashMap::new(),
            disabled: None,
            text: None,
        }
    }
}

/// In-memory host: elements keyed by id, with a subscription log.
///
/// Writes to unknown ids are ignored, as the `Host` contract requires.
#[derive(Clone, Debug, Default)]
pub struct FakeHost {
    elements: AHashMap<ElementId, FakeElement>,
    subscriptions: Vec<(ElementId, SignalKind)>,
    next_id: u64,
}

impl FakeHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, element: FakeElement) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, element);
        id
    }

    /// Add a value-bearing input of the given kind.
    pub fn add_input(&mut self, kind: InputKind, value: &str) -> ElementId {
        self.add(FakeElement::new(kind, Some(value.to_string())))
    }

    /// Add a plain element (button, message area).
    pub fn add_element(&mut self) -> ElementId {
        self.add(FakeElement::new(InputKind::Other, None))
    }

    /// Set an attribute on an element.
    pub fn set_attr(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.attrs.insert(name.to_string(), value.to_string());
        }
    }

    /// Simulate the user replacing the field's value. The test still has
    /// to deliver the matching signal itself.
    pub fn enter_value(&mut self, id: ElementId, value: &str) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.value = Some(value.to_string());
        }
    }

    /// The element's disabled flag; `None` if it was never written.
    #[must_use]
    pub fn disabled(&self, id: ElementId) -> Option<bool> {
        self.elements.get(&id).and_then(|e| e.disabled)
    }

    /// The element's text content; `None` if it was never written.
    #[must_use]
    pub fn text(&self, id: ElementId) -> Option<String> {
        self.elements.get(&id).and_then(|e| e.text.clone())
    }

    /// Every subscription registered so far, in registration order.
    #[must_use]
    pub fn subscriptions(&self) -> &[(ElementId, SignalKind)] {
        &self.subscriptions
    }

    /// How many subscriptions were registered for `field`.
    #[must_use]
    pub fn subscription_count(&self, field: ElementId) -> usize {
        self.subscriptions.iter().filter(|(f, _)| *f == field).count()
    }
}

impl Host for FakeHost {
    fn input_kind(&self, field: ElementId) -> InputKind {
        self.elements
            .get(&field)
            .map_or(InputKind::Other, |e| e.kind)
    }

    fn value(&self, field: ElementId) -> Option<String> {
        self.elements.get(&field).and_then(|e| e.value.clone())
    }

    fn set_value(&mut self, field: ElementId, value: &str) {
        if let Some(element) = self.elements.get_mut(&field) {
            element.value = Some(value.to_string());
        }
    }

    fn attr(&self, element: ElementId, name: &str) -> Option<String> {
        self.elements
            .get(&element)
            .and_then(|e| e.attrs.get(name).cloned())
    }

    fn resolves(&self, element: ElementId) -> bool {
        self.elements.contains_key(&element)
    }

    fn set_disabled(&mut self, element: ElementId, disabled: bool) {
        if let Some(e) = self.elements.get_mut(&element) {
            e.disabled = Some(disabled);
        }
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        if let Some(e) = self.elements.get_mut(&element) {
            e.text = Some(text.to_string());
        }
    }

    fn subscribe(&mut self, field: ElementId, signal: SignalKind) {
        self.subscriptions.push((field, signal));
    }
}

/// Cloneable diagnostics capture; clones share one issue list.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    issues: Rc<RefCell<Vec<Issue>>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the issues reported so far.
    #[must_use]
    pub fn issues(&self) -> Vec<Issue> {
        self.issues.borrow().clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.issues.borrow_mut().clear();
    }
}

impl DiagnosticsSink for RecordingSink {
    fn report(&self, issue: Issue) {
        self.issues.borrow_mut().push(issue);
    }
}

/// The standard scenario: a number input with bounds, one button disabled
/// at each limit, a submit button disabled out of range, and a message
/// area.
#[derive(Clone, Debug)]
pub struct RangeFixture {
    pub host: FakeHost,
    pub field: ElementId,
    pub decrement: ElementId,
    pub increment: ElementId,
    pub submit: ElementId,
    pub message: ElementId,
}

impl RangeFixture {
    /// Build the scenario with the given current value and bounds.
    #[must_use]
    pub fn new(value: &str, min: &str, max: &str) -> Self {
        let mut host = FakeHost::new();
        let field = host.add_input(InputKind::Number, value);
        host.set_attr(field, rangebind::MIN_ATTR, min);
        host.set_attr(field, rangebind::MAX_ATTR, max);
        let decrement = host.add_element();
        let increment = host.add_element();
        let submit = host.add_element();
        let message = host.add_element();
        Self {
            host,
            field,
            decrement,
            increment,
            submit,
            message,
        }
    }

    /// Options wiring the fixture's buttons and message area.
    #[must_use]
    pub fn options(&self) -> RangeOptions {
        RangeOptions::new()
            .min_targets(vec![self.decrement])
            .max_targets(vec![self.increment])
            .out_of_range_targets(vec![self.submit])
            .message_target(self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_are_inert() {
        let mut host = FakeHost::new();
        let ghost = ElementId(99);
        host.set_disabled(ghost, true);
        host.set_text(ghost, "boo");
        assert_eq!(host.disabled(ghost), None);
        assert_eq!(host.text(ghost), None);
        assert!(!host.resolves(ghost));
        assert_eq!(host.input_kind(ghost), InputKind::Other);
    }

    #[test]
    fn fixture_wires_bounds_onto_the_field() {
        let fx = RangeFixture::new("5", "1", "10");
        assert_eq!(
            fx.host.attr(fx.field, rangebind::MIN_ATTR).as_deref(),
            Some("1")
        );
        assert_eq!(
            fx.host.attr(fx.field, rangebind::MAX_ATTR).as_deref(),
            Some("10")
        );
        assert_eq!(fx.host.value(fx.field).as_deref(), Some("5"));
    }

    #[test]
    fn recording_sink_clones_share_the_list() {
        let sink = RecordingSink::new();
        let twin = sink.clone();
        twin.report(Issue::ParseFailure { raw: "x".into() });
        assert_eq!(sink.issues().len(), 1);
    }
}
