//! View components for tripview.
//!
//! All views implement the [`View`] trait which provides a consistent interface
//! for producing markup, caching the root element and handling user events.

mod element;
mod listener;
mod trip_point_edit;

pub use crate::event::{EventKind, EventResult, Selector, UiEvent};
pub use element::Element;
pub use listener::{Handler, Listeners};
pub use trip_point_edit::{FORM, ROLLUP_BUTTON, TripPointEditOptions, TripPointEditView};

use crate::error::RenderError;

/// Trait for all view components.
///
/// A view describes its markup through [`View::template`] and owns an
/// [`Element`] that caches the rendered result until [`View::remove_element`]
/// tears it down.
pub trait View {
    /// Build the markup for this view from its current fields.
    fn template(&self) -> Result<String, RenderError>;

    /// The cache holding this view's root element.
    fn element_cache(&self) -> &Element;

    fn element_cache_mut(&mut self) -> &mut Element;

    /// The rendered root element, created on first access.
    fn element(&self) -> Result<&str, RenderError> {
        self.element_cache().get_or_try_init(|| self.template())
    }

    /// Drop the cached root element.
    fn remove_element(&mut self) {
        self.element_cache_mut().clear();
    }

    /// Handle a user event.
    /// - `Ignored` - no listener matched, parent should process it
    /// - `Consumed` - at least one listener ran
    fn dispatch(&mut self, _event: &mut UiEvent) -> EventResult {
        EventResult::Ignored
    }
}
