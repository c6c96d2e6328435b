//! Info command implementation

use clap::Args;
use indaga_core::config::{Config, ConfigSources, user_config_dir};
use indaga_core::stopwords::SPANISH_STOPWORDS;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_config_dir: Option<String>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    top_n: usize,
    min_length: usize,
    strip_digits: bool,
    reduce_top_n: usize,
    reduce_cap: usize,
    format: &'static str,
    chart_size: (u32, u32),
    search_backend: &'static str,
    summary_sentences: usize,
    stopwords: usize,
    extra_stopwords: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_limit: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            user_config_dir: user_config_dir().map(|p| p.to_string()),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            top_n: config.top_n,
            min_length: config.min_length,
            strip_digits: config.strip_digits,
            reduce_top_n: config.reduce_top_n,
            reduce_cap: config.reduce_cap,
            format: config.format.as_str(),
            chart_size: (config.chart_width, config.chart_height),
            search_backend: config.search_backend.as_str(),
            summary_sentences: config.summary_sentences,
            stopwords: SPANISH_STOPWORDS.len(),
            extra_stopwords: config.extra_stopwords.len(),
            input_limit: config.input_limit(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), package.license);
    }
    if !package.repository.is_empty() {
        println!("{}: {}", "Repository".dimmed(), package.repository.cyan());
    }

    let cfg = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    match cfg.config_file {
        Some(ref path) => println!("{}: {}", "Config file".dimmed(), path.cyan()),
        None => println!("{}: {}", "Config file".dimmed(), "none loaded".yellow()),
    }
    if let Some(ref dir) = cfg.user_config_dir {
        println!("{}: {}", "User config dir".dimmed(), dir);
    }
    println!("{}: {}", "Log level".dimmed(), cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }

    println!();
    println!("{}", "Keywords".bold().underline());
    println!("{}: {}", "Top".dimmed(), cfg.top_n);
    println!("{}: > {} chars", "Min length".dimmed(), cfg.min_length);
    println!("{}: {}", "Strip digits".dimmed(), cfg.strip_digits);
    println!(
        "{}: {} built-in, {} extra",
        "Stopwords".dimmed(),
        cfg.stopwords,
        cfg.extra_stopwords
    );
    println!(
        "{}: top {}, cap {}",
        "Reduction".dimmed(),
        cfg.reduce_top_n,
        cfg.reduce_cap
    );

    println!();
    println!("{}", "Output".bold().underline());
    println!("{}: {}", "Format".dimmed(), cfg.format);
    println!("{}: {}x{}", "Chart size".dimmed(), cfg.chart_size.0, cfg.chart_size.1);
    println!("{}: {}", "Search backend".dimmed(), cfg.search_backend);
    println!("{}: {} sentences", "Summary".dimmed(), cfg.summary_sentences);
    match cfg.input_limit {
        Some(limit) => println!("{}: {limit} bytes", "Input limit".dimmed()),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_info_text_succeeds() {
        let result = cmd_info(
            InfoArgs::default(),
            false,
            &Config::default(),
            &ConfigSources::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        let result = cmd_info(
            InfoArgs::default(),
            true,
            &Config::default(),
            &ConfigSources::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_info_no_file() {
        let info = ConfigInfo::from_config(&Config::default(), &ConfigSources::default());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.format, "table");
        assert_eq!(info.chart_size, (1000, 700));
        assert_eq!(info.stopwords, SPANISH_STOPWORDS.len());
    }

    #[test]
    fn disabled_limit_is_reported() {
        let config = Config {
            disable_input_limit: true,
            ..Config::default()
        };
        let info = ConfigInfo::from_config(&config, &ConfigSources::default());
        assert!(info.input_limit.is_none());
    }
}
