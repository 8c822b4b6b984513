use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "tripview", version, about = "Render the edit form for trip points")]
pub struct Args {
    /// Dataset file (overrides `dataset` from the config file)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the edit form for a point, or for a new point when no id is given
    Render(RenderArgs),
    /// List the points in the dataset
    List,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Point id (e.g., "p-1")
    #[arg(short, long)]
    pub point: Option<String>,

    /// Write the markup to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Interactions to replay against the rendered form, in order
    #[arg(short, long, value_enum)]
    pub simulate: Vec<Interaction>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Interaction {
    /// Click the rollup button
    Rollup,
    /// Submit the form
    Submit,
}
