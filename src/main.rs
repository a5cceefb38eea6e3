use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stockroom::api::ApiServer;
use stockroom::cli::{Cli, Command};
use stockroom::client::{table, ApiClient, CategoryFilter, Controller, ViewIntent};
use stockroom::config::Config;
use stockroom::inventory::{Category, InventoryService, ItemPatch, NewItem, SortField, SortOrder};
use stockroom::store::FileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    match cli.command {
        Command::Serve { bind, data_file } => serve(config, bind, data_file).await,
        Command::List {
            category,
            sort,
            desc,
            api_url,
        } => list(config, category, sort, desc, api_url).await,
        Command::Add {
            name,
            quantity,
            price,
            category,
            api_url,
        } => {
            let new = NewItem {
                name,
                quantity,
                price,
                category,
            };
            add(config, new, api_url).await
        }
        Command::Update {
            id,
            name,
            quantity,
            price,
            category,
            api_url,
        } => {
            let patch = ItemPatch {
                name,
                quantity,
                price,
                category,
            };
            update(config, id, patch, api_url).await
        }
        Command::Remove { id, api_url } => remove(config, id, api_url).await,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();
}

async fn serve(
    config: Config,
    bind: Option<String>,
    data_file: Option<std::path::PathBuf>,
) -> anyhow::Result<()> {
    init_tracing();

    let bind_addr = bind.unwrap_or(config.server.bind_addr);
    let data_file = data_file.unwrap_or(config.storage.data_file);
    tracing::info!(data_file = %data_file.display(), "using inventory file");

    let store = FileStore::new(data_file);
    let service = InventoryService::new(Arc::new(store));

    let mut server = ApiServer::new(service);
    server
        .bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    server.run().await.context("server exited with an error")
}

fn controller_for(config: &Config, api_url: Option<String>) -> Controller {
    let base_url = api_url.unwrap_or_else(|| config.server.base_url.clone());
    Controller::new(ApiClient::new(base_url))
}

/// Surface the controller's stored error, if any, as the process result.
fn check(controller: &Controller) -> anyhow::Result<()> {
    match &controller.state().error {
        Some(message) => anyhow::bail!("{message}"),
        None => Ok(()),
    }
}

async fn list(
    config: Config,
    category: Option<Category>,
    sort: SortField,
    desc: bool,
    api_url: Option<String>,
) -> anyhow::Result<()> {
    let mut controller = controller_for(&config, api_url);

    let filter = match category {
        Some(category) => CategoryFilter::Only(category),
        None => CategoryFilter::All,
    };
    let order = if desc { SortOrder::Desc } else { SortOrder::Asc };
    controller.apply(ViewIntent::SetFilter(filter));
    controller.apply(ViewIntent::SetSort { field: sort, order });

    controller.refresh().await;
    check(&controller)?;

    print!("{}", table::render(controller.state()));
    Ok(())
}

async fn add(config: Config, new: NewItem, api_url: Option<String>) -> anyhow::Result<()> {
    let mut controller = controller_for(&config, api_url);

    let id = controller.add(new).await;
    check(&controller)?;

    if let Some(id) = id {
        println!("Created item {id}");
    }
    print!("{}", table::render(controller.state()));
    Ok(())
}

async fn update(
    config: Config,
    id: String,
    patch: ItemPatch,
    api_url: Option<String>,
) -> anyhow::Result<()> {
    let mut controller = controller_for(&config, api_url);

    controller.update(&id, patch).await;
    check(&controller)?;

    println!("Updated item {id}");
    print!("{}", table::render(controller.state()));
    Ok(())
}

async fn remove(config: Config, id: String, api_url: Option<String>) -> anyhow::Result<()> {
    let mut controller = controller_for(&config, api_url);

    controller.remove(&id).await;
    check(&controller)?;

    println!("Removed item {id}");
    print!("{}", table::render(controller.state()));
    Ok(())
}
