use clap::Parser;
use std::path::PathBuf;

use vendor_discovery::application::dto::OutputFormat;
use vendor_discovery::discovery::domain::ViewMode;

/// Browse a vendor catalog from a shareable query string
#[derive(Parser, Debug)]
#[command(name = "vendor-discovery")]
#[command(version)]
#[command(
    about = "Filter, paginate and map a vendor catalog from a shareable query string",
    long_about = None
)]
pub struct Args {
    /// Query string describing filters and view, e.g. "mainCategory=photography&minPrice=500"
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Catalog source: path to a JSON file or base URL of a catalog service
    #[arg(short, long)]
    pub catalog: Option<String>,

    /// View to render: list or map (overrides the query's view)
    #[arg(long)]
    pub view: Option<ViewMode>,

    /// Output format: markdown or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Vendor IDs already saved by the viewer (in-memory store only)
    /// Can be specified multiple times: --saved a --saved b
    #[arg(long = "saved", value_name = "ID")]
    pub saved: Vec<String>,

    /// Base URL of the saved-vendor service
    #[arg(long, value_name = "URL")]
    pub saved_store: Option<String>,

    /// Toggle the saved flag of a vendor after the listing loads
    #[arg(long, value_name = "ID")]
    pub toggle_saved: Option<String>,

    /// Share a vendor from the listing; prints the link when sharing is unavailable
    #[arg(long, value_name = "ID")]
    pub share: Option<String>,

    /// Results per page when the query doesn't set pageSize
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Path to a config file (defaults to ./vendor-discovery.config.yml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show debug logs on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["vendor-discovery"]).unwrap();
        assert_eq!(args.query, "");
        assert!(args.catalog.is_none());
        assert!(args.view.is_none());
        assert!(args.format.is_none());
        assert!(args.saved.is_empty());
        assert!(!args.verbose);
    }

    #[test]
    fn test_full_invocation() {
        let args = Args::try_parse_from([
            "vendor-discovery",
            "-q",
            "mainCategory=photography&page=2",
            "-c",
            "catalog.json",
            "--view",
            "MAP",
            "-f",
            "md",
            "--saved",
            "a",
            "--saved",
            "b",
            "--page-size",
            "6",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.query, "mainCategory=photography&page=2");
        assert_eq!(args.catalog.as_deref(), Some("catalog.json"));
        assert_eq!(args.view, Some(ViewMode::Map));
        assert_eq!(args.format, Some(OutputFormat::Markdown));
        assert_eq!(args.saved, vec!["a", "b"]);
        assert_eq!(args.page_size, Some(6));
        assert!(args.verbose);
    }

    #[test]
    fn test_invalid_view_rejected() {
        let result = Args::try_parse_from(["vendor-discovery", "--view", "grid"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Args::try_parse_from(["vendor-discovery", "--format", "xml"]);
        assert!(result.is_err());
    }
}
