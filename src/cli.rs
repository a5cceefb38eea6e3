//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::inventory::{Category, SortField};

#[derive(Debug, Parser)]
#[command(
    name = "stockroom",
    version,
    about = "Flat-file inventory tracker with an HTTP API"
)]
pub struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the inventory API server.
    Serve {
        /// Override the configured bind address (host:port).
        #[arg(long)]
        bind: Option<String>,
        /// Override the configured inventory file path.
        #[arg(long)]
        data_file: Option<PathBuf>,
    },

    /// List items, filtered and sorted, with the total inventory value.
    List {
        /// Show only this category.
        #[arg(long)]
        category: Option<Category>,
        /// Sort field: name, quantity, price, or category.
        #[arg(long, default_value = "name")]
        sort: SortField,
        /// Sort descending instead of ascending.
        #[arg(long)]
        desc: bool,
        /// Override the configured API base URL.
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Add a new item.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        quantity: u32,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        category: Category,
        /// Override the configured API base URL.
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Update fields of an existing item; omitted fields are untouched.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        quantity: Option<u32>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        category: Option<Category>,
        /// Override the configured API base URL.
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Remove an item.
    Remove {
        id: String,
        /// Override the configured API base URL.
        #[arg(long)]
        api_url: Option<String>,
    },
}
