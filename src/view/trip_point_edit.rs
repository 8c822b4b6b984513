use tracing::debug;

use crate::error::RenderError;
use crate::event::{EventKind, EventResult, Selector, UiEvent};
use crate::model::{DestinationLookup, OfferLookup, TripPoint, blank_point};
use crate::template;
use crate::view::{Element, Listeners, View};

/// The control that collapses the form.
pub const ROLLUP_BUTTON: Selector = Selector::Class("event__rollup-btn");

/// The form element itself.
pub const FORM: Selector = Selector::Tag("form");

/// Construction options for [`TripPointEditView`].
pub struct TripPointEditOptions<'a> {
    /// The point being edited; `None` opens the form for a new point.
    pub trip_point: Option<TripPoint>,
    pub destinations: &'a dyn DestinationLookup,
    pub offers: &'a dyn OfferLookup,
    /// Called when the user asks to collapse the form.
    pub on_rollup_click: Box<dyn FnMut() + 'a>,
    /// Called when the user submits the form.
    pub on_form_submit: Box<dyn FnMut() + 'a>,
}

/// Editable form for a single trip point.
///
/// The markup is rendered once, during construction. Reading the edited
/// values back is left to the caller; the view only reports that the user
/// rolled the form up or submitted it.
pub struct TripPointEditView<'a> {
    trip_point: TripPoint,
    destinations: &'a dyn DestinationLookup,
    offers: &'a dyn OfferLookup,
    element: Element,
    listeners: Listeners<'a>,
}

impl<'a> TripPointEditView<'a> {
    pub fn new(options: TripPointEditOptions<'a>) -> Result<Self, RenderError> {
        let TripPointEditOptions {
            trip_point,
            destinations,
            offers,
            mut on_rollup_click,
            mut on_form_submit,
        } = options;

        let mut view = Self {
            trip_point: trip_point.unwrap_or_else(blank_point),
            destinations,
            offers,
            element: Element::new(),
            listeners: Listeners::default(),
        };
        view.element()?;

        view.listeners.add(
            &view.element,
            EventKind::Click,
            ROLLUP_BUTTON,
            Box::new(move |event: &mut UiEvent| {
                event.prevent_default();
                on_rollup_click();
            }),
        )?;
        view.listeners.add(
            &view.element,
            EventKind::Submit,
            FORM,
            Box::new(move |event: &mut UiEvent| {
                event.prevent_default();
                on_form_submit();
            }),
        )?;

        debug!(point = %view.trip_point.id, "Created trip point edit view");
        Ok(view)
    }

    pub const fn trip_point(&self) -> &TripPoint {
        &self.trip_point
    }
}

impl View for TripPointEditView<'_> {
    fn template(&self) -> Result<String, RenderError> {
        template::trip_point_edit(&self.trip_point, self.destinations, self.offers)
    }

    fn element_cache(&self) -> &Element {
        &self.element
    }

    fn element_cache_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn dispatch(&mut self, event: &mut UiEvent) -> EventResult {
        self.listeners.dispatch(event)
    }
}
