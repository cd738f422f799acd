mod cli;

use clap::Parser;
use cli::Args;
use std::process;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vendor_discovery::adapters::outbound::console::{InMemoryHistory, StderrNotifier};
use vendor_discovery::adapters::outbound::platform::UnsupportedShare;
use vendor_discovery::application::dto::{OutputFormat, ShareOutcome, ToggleOutcome};
use vendor_discovery::application::factories::{
    CatalogFactory, CatalogSource, FormatterFactory, PresenterFactory, PresenterType,
};
use vendor_discovery::application::use_cases::DiscoveryEngine;
use vendor_discovery::config::{discover_config, load_config_from_path, ConfigFile};
use vendor_discovery::discovery::domain::{VendorId, MAX_PAGE_SIZE};
use vendor_discovery::discovery::services::HoverBus;
use vendor_discovery::ports::inbound::DiscoveryPort;
use vendor_discovery::shared::error::{DiscoveryError, ExitCode};
use vendor_discovery::shared::Result;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also land here
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_tracing(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("vendor_discovery=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let mut options = config.discovery_options()?;
    if let Some(page_size) = args.page_size {
        validate_page_size(page_size)?;
        options = options.with_page_size(page_size);
    }

    let source = resolve_catalog_source(args.catalog.as_deref(), &config)?;
    debug!(?source, "Resolved catalog source");

    let saved = parse_vendor_ids(&args.saved)?;
    let store_url = args.saved_store.as_deref().or(config.saved_store.as_deref());

    // Create adapters (Dependency Injection)
    let catalog = CatalogFactory::create(&source)?;
    let saved_store = CatalogFactory::saved_store(store_url, saved)?;

    let engine = DiscoveryEngine::new(
        catalog,
        saved_store,
        StderrNotifier::new(),
        InMemoryHistory::new(),
        UnsupportedShare,
        options,
        Arc::new(HoverBus::new()),
    );

    let mut view = engine.mount(&args.query).await;
    if let Some(mode) = args.view {
        if mode != view.mode {
            view = engine.switch_view(mode).await;
        }
    }

    if let Some(raw_id) = args.toggle_saved.as_deref() {
        let id = VendorId::new(raw_id)?;
        if let ToggleOutcome::RedirectRequired { redirect_to } = engine.toggle_saved(&id).await {
            eprintln!("🔒 Sign in to save vendors: {}", redirect_to);
        }
        if let Some(rendered) = engine.render_current() {
            view = rendered;
        }
    }

    if let Some(raw_id) = args.share.as_deref() {
        let id = VendorId::new(raw_id)?;
        match engine.share(&id)? {
            ShareOutcome::Shared => eprintln!("🔗 Shared {}", id),
            ShareOutcome::Fallback { url, message } => eprintln!("🔗 {}\n   {}", message, url),
        }
    }

    let format = resolve_format(args.format, &config)?;
    eprintln!("{}", FormatterFactory::progress_message(format));

    let formatter = FormatterFactory::create(format);
    let formatted_output = formatter.format(&view)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    if view.is_error() {
        Ok(ExitCode::ApplicationError)
    } else {
        Ok(ExitCode::Success)
    }
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = args.config.as_deref() {
        return load_config_from_path(path);
    }
    let cwd = std::env::current_dir()?;
    Ok(discover_config(&cwd)?.unwrap_or_default())
}

/// CLI flag wins over the config file
fn resolve_catalog_source(flag: Option<&str>, config: &ConfigFile) -> Result<CatalogSource> {
    match flag.or(config.catalog.as_deref()) {
        Some(source) => CatalogSource::parse(source),
        None => Err(DiscoveryError::InvalidCatalogSource {
            source_ref: "(none)".to_string(),
            reason: "No catalog given. Pass --catalog or set `catalog` in vendor-discovery.config.yml".to_string(),
        }
        .into()),
    }
}

fn resolve_format(flag: Option<OutputFormat>, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }
    match config.format.as_deref() {
        Some(raw) => raw
            .parse()
            .map_err(|message: String| DiscoveryError::Validation { message }.into()),
        None => Ok(OutputFormat::default()),
    }
}

fn validate_page_size(page_size: u32) -> Result<()> {
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(DiscoveryError::Validation {
            message: format!(
                "--page-size must be between 1 and {} (got {})",
                MAX_PAGE_SIZE, page_size
            ),
        }
        .into());
    }
    Ok(())
}

fn parse_vendor_ids(raw: &[String]) -> Result<Vec<VendorId>> {
    raw.iter().map(|id| VendorId::new(id.as_str())).collect()
}
