//! Open Library search TUI - entry point.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use bookfind::api::HttpCatalogClient;
use bookfind::view::{ColorConfig, UiStyles};

/// Search the Open Library book catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "bookfind")]
#[command(version)]
#[command(about = "TUI application for searching the Open Library book catalog")]
pub struct Args {
    /// Initial search query, submitted immediately on startup
    pub query: Option<String>,

    /// Catalog search endpoint URL (overrides config file and env)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Number of card columns in the results grid
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub columns: Option<u16>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = bookfind::config::load_config_with_precedence(args.config.clone())?;
        let merged = bookfind::config::merge_config(config_file);
        let with_env = bookfind::config::apply_env_overrides(merged);
        bookfind::config::apply_cli_overrides(with_env, args.endpoint.clone(), args.columns)
    };

    bookfind::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let styles = UiStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));
    let client = Arc::new(HttpCatalogClient::new(config.search_url.clone()));

    bookfind::view::run_with_client(client, config, styles, args.query)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn help_does_not_error() {
        let result = Args::try_parse_from(["bookfind", "--help"]);
        // Help returns Err with DisplayHelp, which is success
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::DisplayHelp
        );
    }

    #[test]
    fn version_does_not_error() {
        let result = Args::try_parse_from(["bookfind", "--version"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::DisplayVersion
        );
    }

    #[test]
    fn no_args_defaults() {
        let args = Args::parse_from(["bookfind"]);
        assert_eq!(args.query, None);
        assert_eq!(args.endpoint, None);
        assert_eq!(args.columns, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn positional_query_is_captured() {
        let args = Args::parse_from(["bookfind", "harry potter"]);
        assert_eq!(args.query.as_deref(), Some("harry potter"));
    }

    #[test]
    fn endpoint_flag() {
        let args = Args::parse_from(["bookfind", "--endpoint", "http://localhost/search.json"]);
        assert_eq!(
            args.endpoint.as_deref(),
            Some("http://localhost/search.json")
        );
    }

    #[test]
    fn columns_flag() {
        let args = Args::parse_from(["bookfind", "--columns", "3"]);
        assert_eq!(args.columns, Some(3));
    }

    #[test]
    fn columns_rejects_zero() {
        let result = Args::try_parse_from(["bookfind", "--columns", "0"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ValueValidation
        );
    }

    #[test]
    fn no_color_flag() {
        let args = Args::parse_from(["bookfind", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn config_path_flag() {
        let args = Args::parse_from(["bookfind", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn combined_flags() {
        let args = Args::parse_from([
            "bookfind",
            "dune",
            "--endpoint",
            "http://mirror/search.json",
            "--columns",
            "4",
            "--no-color",
        ]);
        assert_eq!(args.query.as_deref(), Some("dune"));
        assert_eq!(args.endpoint.as_deref(), Some("http://mirror/search.json"));
        assert_eq!(args.columns, Some(4));
        assert!(args.no_color);
    }

    #[test]
    fn endpoint_flows_through_config_precedence_chain() {
        use bookfind::config::{apply_cli_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            search_url: Some("http://from-file/search.json".to_string()),
            covers_url: None,
            columns: None,
            log_file_path: None,
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(
            merged.search_url, "http://from-file/search.json",
            "config file should override the default endpoint"
        );

        let with_cli = apply_cli_overrides(
            merged,
            Some("http://from-cli/search.json".to_string()),
            None,
        );
        assert_eq!(
            with_cli.search_url, "http://from-cli/search.json",
            "CLI endpoint should override all other sources"
        );
    }

    #[test]
    fn default_endpoint_is_open_library() {
        use bookfind::config::ResolvedConfig;

        let config = ResolvedConfig::default();
        assert_eq!(config.search_url, "https://openlibrary.org/search.json");
    }
}
