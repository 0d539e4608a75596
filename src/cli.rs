//! Defines the command-line interface structure using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::LayerKind;

#[derive(Parser)]
#[command(
    name = "sdet-architect",
    version,
    about = "Enterprise Java test-automation framework designer"
)]
pub struct Cli {
    /// Path to config.toml (defaults to ~/.sdet-architect/config.toml)
    #[arg(long, global = true, env = "SDET_ARCHITECT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Show the framework development roadmap, or one phase in detail
    Phases {
        /// Phase number (1-5)
        id: Option<u32>,
    },
    /// Show the layer architecture, or one layer in detail
    Layers {
        /// Layer name, e.g. `page` or `Page Object Layer`
        layer: Option<LayerKind>,
        #[arg(long, help = "Print the layer record(s) as JSON")]
        json: bool,
    },
    /// Generate a Java code snippet for a layer with an LLM
    Snippet {
        /// Layer to target (defaults to the selected layer)
        #[arg(long)]
        layer: Option<LayerKind>,
        /// Generate one snippet for every layer
        #[arg(long, conflicts_with = "layer")]
        all_layers: bool,
        /// Scenario to implement, e.g. "login page with dynamic wait for error message"
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },
    /// Generate three business-focused Gherkin scenarios for a feature
    Scenarios {
        /// Feature name
        #[arg(required = true, num_args = 1..)]
        feature: Vec<String>,
    },
    /// Set the project name shown in the interactive session
    Project { name: String },
    /// Start an interactive session (REPL)
    Interactive,
}
