use tracing::debug;

use crate::error::RenderError;
use crate::event::{EventKind, EventResult, Selector, UiEvent};
use crate::view::Element;

/// Callback run when a matching event reaches a view.
pub type Handler<'a> = Box<dyn FnMut(&mut UiEvent) + 'a>;

struct Listener<'a> {
    kind: EventKind,
    target: Selector,
    handler: Handler<'a>,
}

/// Event listeners registered by a view against its root element.
#[derive(Default)]
pub struct Listeners<'a> {
    listeners: Vec<Listener<'a>>,
}

impl<'a> Listeners<'a> {
    /// Register `handler` for `kind` events on `target`.
    ///
    /// Fails when the element has not been rendered or nothing in it
    /// matches `target`.
    pub fn add(
        &mut self,
        element: &Element,
        kind: EventKind,
        target: Selector,
        handler: Handler<'a>,
    ) -> Result<(), RenderError> {
        if !element.matches(target) {
            return Err(RenderError::MissingTarget(target));
        }
        self.listeners.push(Listener {
            kind,
            target,
            handler,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Run every listener registered for the event's kind and target.
    pub fn dispatch(&mut self, event: &mut UiEvent) -> EventResult {
        let (kind, target) = (event.kind(), event.target());
        let mut result = EventResult::Ignored;
        for listener in self
            .listeners
            .iter_mut()
            .filter(|listener| listener.kind == kind && listener.target == target)
        {
            (listener.handler)(event);
            result = EventResult::Consumed;
        }

        debug!(?kind, %target, ?result, "Dispatched event");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn form_element() -> Element {
        let element = Element::new();
        element
            .get_or_try_init(|| Ok(r#"<form><button class="save"></button></form>"#.to_string()))
            .unwrap();
        element
    }

    #[test]
    fn test_add_requires_matching_target() {
        let element = form_element();
        let mut listeners = Listeners::default();

        let result = listeners.add(
            &element,
            EventKind::Click,
            Selector::Class("missing"),
            Box::new(|_: &mut UiEvent| {}),
        );

        assert!(matches!(
            result,
            Err(RenderError::MissingTarget(Selector::Class("missing")))
        ));
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_dispatch_matches_kind_and_target() {
        let element = form_element();
        let clicks = Cell::new(0);
        let mut listeners = Listeners::default();
        listeners
            .add(
                &element,
                EventKind::Click,
                Selector::Class("save"),
                Box::new(|_: &mut UiEvent| clicks.set(clicks.get() + 1)),
            )
            .unwrap();

        let mut submit = UiEvent::submit(Selector::Class("save"));
        assert_eq!(listeners.dispatch(&mut submit), EventResult::Ignored);

        let mut click = UiEvent::click(Selector::Class("save"));
        assert_eq!(listeners.dispatch(&mut click), EventResult::Consumed);
        assert_eq!(clicks.get(), 1);
        assert_eq!(listeners.len(), 1);
    }
}
