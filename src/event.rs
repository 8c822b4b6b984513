//! Event types and handling results.
//!
//! Events represent user interaction with rendered markup (clicks, form
//! submissions). They flow INTO a view through [`crate::view::View::dispatch`].

use std::fmt;

/// Addresses an element inside a view's markup.
///
/// Only the two selector shapes the views need are supported: a single class
/// name (`.event__rollup-btn`) and a bare tag name (`form`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Any element carrying this class
    Class(&'static str),
    /// Any element with this tag name
    Tag(&'static str),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(name) => write!(f, ".{name}"),
            Self::Tag(name) => f.write_str(name),
        }
    }
}

/// Kind of user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer click on a control
    Click,
    /// Form submission
    Submit,
}

/// A user interaction aimed at an element of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    kind: EventKind,
    target: Selector,
    default_prevented: bool,
}

impl UiEvent {
    pub const fn new(kind: EventKind, target: Selector) -> Self {
        Self {
            kind,
            target,
            default_prevented: false,
        }
    }

    /// A click on `target`.
    pub const fn click(target: Selector) -> Self {
        Self::new(EventKind::Click, target)
    }

    /// A submission of `target`.
    pub const fn submit(target: Selector) -> Self {
        Self::new(EventKind::Submit, target)
    }

    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    pub const fn target(&self) -> Selector {
        self.target
    }

    /// Suppress the host's default action (navigation, page reload).
    pub const fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub const fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Result of handling an event.
///
/// Views return this to indicate whether any listener reacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// No listener matched, propagate to parent
    Ignored,
    /// At least one listener ran
    Consumed,
}

impl EventResult {
    /// Returns true if the event was consumed (not ignored).
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_display() {
        assert_eq!(Selector::Class("event__rollup-btn").to_string(), ".event__rollup-btn");
        assert_eq!(Selector::Tag("form").to_string(), "form");
    }

    #[test]
    fn test_prevent_default() {
        let mut event = UiEvent::click(Selector::Class("btn"));
        assert!(!event.is_default_prevented());
        event.prevent_default();
        assert!(event.is_default_prevented());
        assert_eq!(event.kind(), EventKind::Click);
    }
}
