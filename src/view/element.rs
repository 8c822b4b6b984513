use std::cell::OnceCell;

use crate::error::RenderError;
use crate::event::Selector;

/// Lazily rendered root element of a view.
#[derive(Debug, Default)]
pub struct Element {
    markup: OnceCell<String>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached markup, rendering it with `init` on first use.
    pub fn get_or_try_init<F>(&self, init: F) -> Result<&str, RenderError>
    where
        F: FnOnce() -> Result<String, RenderError>,
    {
        if let Some(markup) = self.markup.get() {
            return Ok(markup.as_str());
        }
        let markup = init()?;
        Ok(self.markup.get_or_init(|| markup).as_str())
    }

    /// The markup if it has been rendered.
    pub fn markup(&self) -> Option<&str> {
        self.markup.get().map(String::as_str)
    }

    pub fn is_rendered(&self) -> bool {
        self.markup.get().is_some()
    }

    pub fn clear(&mut self) {
        self.markup.take();
    }

    /// Whether any element in the rendered markup matches `selector`.
    pub fn matches(&self, selector: Selector) -> bool {
        let Some(markup) = self.markup() else {
            return false;
        };

        match selector {
            Selector::Class(name) => markup
                .split("class=\"")
                .skip(1)
                .filter_map(|rest| rest.split('"').next())
                .any(|classes| classes.split_whitespace().any(|class| class == name)),
            Selector::Tag(tag) => markup.match_indices('<').any(|(index, _)| {
                markup[index + 1..]
                    .strip_prefix(tag)
                    .and_then(|after| after.chars().next())
                    .is_some_and(|next| next.is_whitespace() || next == '>' || next == '/')
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(markup: &str) -> Element {
        let element = Element::new();
        element.get_or_try_init(|| Ok(markup.to_string())).unwrap();
        element
    }

    #[test]
    fn test_renders_once() {
        let element = Element::new();
        let mut calls = 0;
        element
            .get_or_try_init(|| {
                calls += 1;
                Ok("<li></li>".to_string())
            })
            .unwrap();
        element
            .get_or_try_init(|| {
                calls += 1;
                Ok("<p></p>".to_string())
            })
            .unwrap();

        assert_eq!(calls, 1);
        assert_eq!(element.markup(), Some("<li></li>"));
    }

    #[test]
    fn test_failed_init_leaves_cache_empty() {
        let element = Element::new();
        let result =
            element.get_or_try_init(|| Err(RenderError::MissingTarget(Selector::Tag("li"))));
        assert!(result.is_err());
        assert!(!element.is_rendered());
    }

    #[test]
    fn test_clear() {
        let mut element = rendered("<li></li>");
        element.clear();
        assert!(element.markup().is_none());
        assert!(!element.matches(Selector::Tag("li")));
    }

    #[test]
    fn test_class_matching() {
        let element =
            rendered(r#"<button class="event__rollup-btn  extra" type="button"></button>"#);
        assert!(element.matches(Selector::Class("event__rollup-btn")));
        assert!(element.matches(Selector::Class("extra")));
        assert!(!element.matches(Selector::Class("event__rollup")));
    }

    #[test]
    fn test_tag_matching() {
        let element = rendered(r##"<li><form action="#"></form><formset></formset></li>"##);
        assert!(element.matches(Selector::Tag("form")));
        assert!(element.matches(Selector::Tag("li")));
        assert!(!element.matches(Selector::Tag("section")));
    }
}
