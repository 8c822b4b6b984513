//! Markup for the trip point edit form.
//!
//! Every function here is pure: it turns records into an HTML fragment and
//! never touches view state. The top-level [`trip_point_edit`] composes the
//! four leaf fragments (event types, photos, destination, offers).

use askama::Template;
use tracing::debug;

use crate::error::RenderError;
use crate::format::to_full_date_time;
use crate::model::{
    Destination, DestinationLookup, Offer, OfferLookup, Picture, PointType, TripPoint,
};

/// Static city suggestions offered by the destination field.
pub const DESTINATION_SUGGESTIONS: [&str; 3] = ["Amsterdam", "Geneva", "Chamonix"];

#[derive(Template)]
#[template(path = "trip_point_edit/event_types.html")]
struct EventTypesTemplate {
    kinds: &'static [PointType],
}

#[derive(Template)]
#[template(path = "trip_point_edit/photos.html")]
struct PhotosTemplate<'a> {
    pictures: &'a [Picture],
}

#[derive(Template)]
#[template(path = "trip_point_edit/destination.html")]
struct DestinationTemplate<'a> {
    description: &'a str,
    photos: String,
}

#[derive(Template)]
#[template(path = "trip_point_edit/offers.html")]
struct OffersTemplate<'a> {
    offers: &'a [&'a Offer],
}

#[derive(Template)]
#[template(path = "trip_point_edit/form.html")]
struct FormTemplate<'a> {
    kind: PointType,
    event_types: String,
    destination_name: &'a str,
    suggestions: &'static [&'static str],
    start: String,
    end: String,
    base_price: u32,
    offers: String,
    destination: String,
}

/// One radio option per event type, in [`PointType::ALL`] order.
pub fn event_types() -> Result<String, RenderError> {
    Ok(EventTypesTemplate {
        kinds: &PointType::ALL,
    }
    .render()?)
}

/// One thumbnail per picture; empty when there are none.
pub fn photos(pictures: &[Picture]) -> Result<String, RenderError> {
    if pictures.is_empty() {
        return Ok(String::new());
    }
    Ok(PhotosTemplate { pictures }.render()?)
}

/// Description and photo strip, or nothing when there is no destination.
pub fn destination(destination: Option<&Destination>) -> Result<String, RenderError> {
    let Some(destination) = destination else {
        return Ok(String::new());
    };

    Ok(DestinationTemplate {
        description: &destination.description,
        photos: photos(&destination.pictures)?,
    }
    .render()?)
}

/// Offer rows in the given order, or nothing when the list is empty.
///
/// Every checkbox is rendered checked.
pub fn offers(offers: &[&Offer]) -> Result<String, RenderError> {
    if offers.is_empty() {
        return Ok(String::new());
    }
    Ok(OffersTemplate { offers }.render()?)
}

/// The complete edit form for `point`.
///
/// An empty destination id renders an empty name field and no destination
/// section. Ids the lookups cannot resolve are reported as errors.
pub fn trip_point_edit(
    point: &TripPoint,
    destinations: &dyn DestinationLookup,
    offer_lookup: &dyn OfferLookup,
) -> Result<String, RenderError> {
    let destination = if point.destination.is_empty() {
        None
    } else {
        Some(
            destinations
                .destination(&point.destination)
                .ok_or_else(|| RenderError::UnknownDestination(point.destination.clone()))?,
        )
    };

    let selected = point
        .offers
        .iter()
        .map(|id| {
            offer_lookup
                .offer(id)
                .ok_or_else(|| RenderError::UnknownOffer(id.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        point = %point.id,
        kind = %point.kind,
        offers = selected.len(),
        "Rendering trip point edit form"
    );

    Ok(FormTemplate {
        kind: point.kind,
        event_types: event_types()?,
        destination_name: destination.map_or("", |destination| destination.name.as_str()),
        suggestions: &DESTINATION_SUGGESTIONS,
        start: to_full_date_time(point.date_from),
        end: to_full_date_time(point.date_to),
        base_price: point.base_price,
        offers: offers(&selected)?,
        destination: self::destination(destination)?,
    }
    .render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DestinationId, OfferId};
    use std::collections::HashMap;

    fn amsterdam() -> Destination {
        Destination {
            name: "Amsterdam".to_string(),
            description: "Nice city".to_string(),
            pictures: vec![Picture::new("1.jpg", "a")],
        }
    }

    fn lookups() -> (HashMap<DestinationId, Destination>, HashMap<OfferId, Offer>) {
        let destinations = HashMap::from([(DestinationId::from("dest-1"), amsterdam())]);
        let offers = HashMap::from([
            (OfferId::from("offer-1"), Offer::new("offer-1", "Luggage", 5)),
            (OfferId::from("offer-2"), Offer::new("offer-2", "Comfort class", 100)),
        ]);
        (destinations, offers)
    }

    #[test]
    fn test_event_types_render_all_in_order() {
        let markup = event_types().unwrap();

        assert_eq!(markup.matches("class=\"event__type-item\"").count(), 9);
        let positions: Vec<_> = PointType::ALL
            .iter()
            .map(|kind| markup.find(&format!("value=\"{kind}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(markup.contains(">Check-in</label>"));
        assert!(markup.contains(">Taxi</label>"));
        assert!(!markup.contains("checked"));
    }

    #[test]
    fn test_photos() {
        assert_eq!(photos(&[]).unwrap(), "");

        let markup = photos(&[Picture::new("1.jpg", "a"), Picture::new("2.jpg", "b")]).unwrap();
        assert_eq!(markup.matches("<img class=\"event__photo\"").count(), 2);
        assert!(markup.find("1.jpg").unwrap() < markup.find("2.jpg").unwrap());
    }

    #[test]
    fn test_destination_absent() {
        assert_eq!(destination(None).unwrap(), "");
    }

    #[test]
    fn test_destination_without_pictures() {
        let place = Destination {
            pictures: Vec::new(),
            ..amsterdam()
        };

        let markup = destination(Some(&place)).unwrap();
        assert!(markup.contains("Nice city"));
        assert!(markup.contains("event__photos-tape"));
        assert!(!markup.contains("class=\"event__photo\""));
    }

    #[test]
    fn test_offers_empty() {
        assert_eq!(offers(&[]).unwrap(), "");
    }

    #[test]
    fn test_offers_always_checked() {
        let luggage = Offer::new("offer-1", "Luggage", 5);
        let markup = offers(&[&luggage]).unwrap();

        assert!(markup.contains("event__section--offers"));
        assert!(
            markup.contains(r#"id="offer-1" type="checkbox" name="event-offer-luggage" checked>"#)
        );
        assert!(markup.contains(r#"<span class="event__offer-title">Luggage</span>"#));
        assert!(markup.contains(r#"<span class="event__offer-price">5</span>"#));
    }

    #[test]
    fn test_form_keeps_offer_order() {
        let (destinations, offer_map) = lookups();
        let point = TripPoint {
            destination: DestinationId::from("dest-1"),
            offers: vec![OfferId::from("offer-2"), OfferId::from("offer-1")],
            ..TripPoint::default()
        };

        let markup = trip_point_edit(&point, &destinations, &offer_map).unwrap();
        let comfort = markup.find("Comfort class").unwrap();
        let luggage = markup.find("Luggage").unwrap();
        assert!(comfort < luggage);
    }

    #[test]
    fn test_form_without_offers_has_no_offers_section() {
        let (destinations, offer_map) = lookups();
        let point = TripPoint {
            destination: DestinationId::from("dest-1"),
            ..TripPoint::default()
        };

        let markup = trip_point_edit(&point, &destinations, &offer_map).unwrap();
        assert!(!markup.contains("event__section--offers"));
        assert!(markup.contains("event__section--destination"));
    }

    #[test]
    fn test_form_without_destination() {
        let (destinations, offer_map) = lookups();

        let markup = trip_point_edit(&TripPoint::default(), &destinations, &offer_map).unwrap();
        assert!(!markup.contains("event__section--destination"));
        assert!(markup.contains(r#"name="event-destination" value="""#));
        assert!(markup.contains(r#"src="img/icons/taxi.png""#));
        assert!(markup.contains(r#"id="event-price-1" type="text" name="event-price" value="0""#));
    }

    #[test]
    fn test_form_static_suggestions() {
        let (destinations, offer_map) = lookups();

        let markup = trip_point_edit(&TripPoint::default(), &destinations, &offer_map).unwrap();
        for city in DESTINATION_SUGGESTIONS {
            assert!(markup.contains(&format!("<option value=\"{city}\"></option>")));
        }
    }

    #[test]
    fn test_form_unknown_destination() {
        let (destinations, offer_map) = lookups();
        let point = TripPoint {
            destination: DestinationId::from("nowhere"),
            ..TripPoint::default()
        };

        let error = trip_point_edit(&point, &destinations, &offer_map).unwrap_err();
        assert!(matches!(error, RenderError::UnknownDestination(id) if id.as_str() == "nowhere"));
    }

    #[test]
    fn test_form_unknown_offer() {
        let (destinations, offer_map) = lookups();
        let point = TripPoint {
            destination: DestinationId::from("dest-1"),
            offers: vec![OfferId::from("offer-9")],
            ..TripPoint::default()
        };

        let error = trip_point_edit(&point, &destinations, &offer_map).unwrap_err();
        assert!(matches!(error, RenderError::UnknownOffer(id) if id.as_str() == "offer-9"));
    }

    #[test]
    fn test_form_escapes_text() {
        let destinations = HashMap::from([(
            DestinationId::from("d"),
            Destination {
                name: "Rock & Roll".to_string(),
                description: "<b>loud</b>".to_string(),
                pictures: Vec::new(),
            },
        )]);
        let offer_map: HashMap<OfferId, Offer> = HashMap::new();
        let point = TripPoint {
            destination: DestinationId::from("d"),
            ..TripPoint::default()
        };

        let markup = trip_point_edit(&point, &destinations, &offer_map).unwrap();
        assert!(markup.contains("Rock &amp; Roll"));
        assert!(!markup.contains("<b>loud</b>"));
    }
}
