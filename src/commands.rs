//! Subcommand implementations.
//!
//! The binary plays the part of the parent controller: it owns the dataset,
//! mounts the edit view and reacts to the view's callbacks.

use std::cell::Cell;
use std::fs;
use std::io::{self, Write};

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use tracing::info;
use tripview::view::{FORM, ROLLUP_BUTTON, UiEvent};
use tripview::{Dataset, TripPointEditOptions, TripPointEditView, View};

use crate::cli::{Interaction, RenderArgs};

impl Interaction {
    const fn event(self) -> UiEvent {
        match self {
            Self::Rollup => UiEvent::click(ROLLUP_BUTTON),
            Self::Submit => UiEvent::submit(FORM),
        }
    }
}

pub fn render(dataset: &Dataset, args: &RenderArgs) -> Result<()> {
    let trip_point = args
        .point
        .as_deref()
        .map(|id| {
            dataset
                .point(id)
                .cloned()
                .ok_or_else(|| eyre!("no point with id `{id}`"))
        })
        .transpose()?;

    let rollups = Cell::new(0_u32);
    let submits = Cell::new(0_u32);

    let mut view = TripPointEditView::new(TripPointEditOptions {
        trip_point,
        destinations: dataset.destinations(),
        offers: dataset.offers(),
        on_rollup_click: Box::new(|| {
            rollups.set(rollups.get() + 1);
            info!("Rollup requested");
        }),
        on_form_submit: Box::new(|| {
            submits.set(submits.get() + 1);
            info!("Form submitted");
        }),
    })?;

    let markup = view.element()?;
    match &args.output {
        Some(path) => fs::write(path, markup)
            .wrap_err_with(|| format!("failed to write markup to {}", path.display()))?,
        None => writeln!(io::stdout().lock(), "{markup}")?,
    }

    for interaction in &args.simulate {
        let mut event = interaction.event();
        let result = view.dispatch(&mut event);
        eprintln!(
            "{interaction:?}: consumed={} default_prevented={}",
            result.is_consumed(),
            event.is_default_prevented()
        );
    }

    if !args.simulate.is_empty() {
        eprintln!("rollups={} submits={}", rollups.get(), submits.get());
    }
    Ok(())
}

pub fn list(dataset: &Dataset) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for point in dataset.points() {
        let destination = dataset
            .destinations()
            .get(&point.destination)
            .map_or("-", |destination| destination.name.as_str());
        writeln!(
            stdout,
            "{}\t{}\t{}\t{}",
            point.id,
            point.kind.label(),
            destination,
            point.base_price
        )?;
    }
    Ok(())
}
