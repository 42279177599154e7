//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the logging subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Load config, pick the product source, build `CatalogApi`
//! 3. **API Dispatch**: Apply selections and refresh the catalog
//! 4. **Output Formatting**: Render the mount point through templates
//!
//! Each invocation is one session: the source is fetched at most once and tab
//! indexes start at 1, so `shelf show 3` with the same filters as `shelf list`
//! refers to the item printed as `3.`.

use super::browse;
use super::render::{render_catalog, render_config, render_details, render_options};
use super::setup::{Cli, Commands, QueryArgs};
use clap::Parser;
use directories::ProjectDirs;
use shelf::api::CatalogApi;
use shelf::config::ShelfConfig;
use shelf::error::{Result, ShelfError};
use shelf::reference::{options, BRANDS, PRODUCT_TYPES};
use shelf::render::{Expansion, RenderOptions};
use shelf::store::file::FileSource;
use shelf::store::http::HttpSource;
use shelf::store::ProductSource;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

type DynSource = Box<dyn ProductSource>;

struct AppContext {
    api: CatalogApi<DynSource>,
    config: ShelfConfig,
    config_dir: PathBuf,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.take() {
        Some(Commands::Brands) => {
            print!("{}", render_options(options(BRANDS)));
            Ok(())
        }
        Some(Commands::Types) => {
            print!("{}", render_options(options(PRODUCT_TYPES)));
            Ok(())
        }
        command => {
            let mut ctx = init_context(&cli)?;
            match command {
                Some(Commands::List { query }) => handle_list(&mut ctx, &query),
                Some(Commands::Show { tab_index, query }) => {
                    handle_show(&mut ctx, &query, tab_index)
                }
                Some(Commands::Export { query, output }) => handle_export(&mut ctx, &query, output),
                Some(Commands::Browse) => handle_browse(&mut ctx),
                Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
                Some(Commands::Brands) | Some(Commands::Types) => Ok(()),
                None => handle_list(&mut ctx, &QueryArgs::default()),
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("shelf=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("SHELF_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Config("Could not determine config dir".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = ShelfConfig::load(&config_dir)?;

    let source: DynSource = match &cli.source {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(HttpSource::new(&config.endpoint)),
    };
    debug!(source = %source.describe(), config_dir = %config_dir.display(), "context ready");

    let mut api = CatalogApi::new(source, RenderOptions::from(&config));
    api.set_sort_label(&config.default_sort);

    Ok(AppContext {
        api,
        config,
        config_dir,
        use_color: !cli.no_color && std::io::stdout().is_terminal(),
    })
}

fn apply_query(ctx: &mut AppContext, query: &QueryArgs) {
    if let Some(sort) = &query.sort {
        ctx.api.set_sort_label(sort);
    }
    if let Some(brand) = &query.brand {
        ctx.api.set_brand_filter(brand);
    }
    if let Some(product_type) = &query.product_type {
        ctx.api.set_type_filter(product_type);
    }
    if let Some(name) = &query.name {
        ctx.api.set_name_filter(name);
    }
}

fn handle_list(ctx: &mut AppContext, query: &QueryArgs) -> Result<()> {
    apply_query(ctx, query);
    ctx.api.refresh();
    print!("{}", render_catalog(ctx.api.mount(), ctx.use_color));
    Ok(())
}

fn handle_show(ctx: &mut AppContext, query: &QueryArgs, tab_index: u64) -> Result<()> {
    apply_query(ctx, query);
    ctx.api.refresh();

    match ctx.api.expand(tab_index) {
        Expansion::NotFound => Err(ShelfError::Api(format!(
            "No product with tab index {} in the current listing",
            tab_index
        ))),
        Expansion::Expanded | Expansion::AlreadyExpanded => {
            if let Some(item) = ctx.api.mount().item(tab_index) {
                print!("{}", render_details(item, ctx.use_color));
            }
            Ok(())
        }
    }
}

fn handle_export(ctx: &mut AppContext, query: &QueryArgs, output: Option<PathBuf>) -> Result<()> {
    apply_query(ctx, query);
    ctx.api.refresh();
    let html = ctx.api.mount().to_html();

    match output {
        Some(path) => {
            std::fs::write(&path, format!("{}\n", html))?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{}", html),
    }
    Ok(())
}

fn handle_browse(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    browse::run_session(&mut ctx.api, stdin.lock(), stdout.lock(), ctx.use_color)
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            let entries = ShelfConfig::KEYS
                .iter()
                .map(|k| Ok((k.to_string(), ctx.config.get(k)?)))
                .collect::<Result<Vec<_>>>()?;
            print!("{}", render_config(entries, ctx.use_color));
        }
        (Some(key), None) => {
            let value = ctx.config.get(&key)?;
            print!("{}", render_config(vec![(key, value)], ctx.use_color));
        }
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.config_dir)?;
            print!("{}", render_config(vec![(key, value)], ctx.use_color));
        }
    }
    Ok(())
}
