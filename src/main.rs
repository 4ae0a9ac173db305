use anyhow::Context;
use clap::Parser;
use hotelmenu::{HotelMenuConfig, OrderPipeline, ReportFormat, TopItemsReport};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hotelmenu")]
#[command(version, about = "Rank the most-ordered menu items in a dining hall order log", long_about = None)]
struct Cli {
    /// Order log to read (one `eater_id,foodmenu_id` per line, .txt only)
    file: Option<PathBuf>,

    /// Number of menu items to show
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Also write the report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file (defaults to ./hotelmenu.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the effective configuration to this file and exit
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    /// Resolve the effective configuration; flags win over the config file
    fn resolve_config(&self) -> anyhow::Result<HotelMenuConfig> {
        let mut config = match &self.config {
            Some(path) => HotelMenuConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => HotelMenuConfig::load_optional()
                .context("Failed to load hotelmenu.toml")?
                .unwrap_or_default(),
        };

        if let Some(file) = &self.file {
            config.input.path = file.clone();
        }
        if let Some(top) = self.top {
            config.report.top = top;
        }
        if let Some(format) = self.format {
            config.report.format = format;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter_layer = if cli.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::new("info")
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("hotelmenu v{}", env!("CARGO_PKG_VERSION"));

    let config = cli.resolve_config()?;
    debug!("Effective config: {:?}", config);

    if let Some(path) = &cli.write_config {
        config
            .save(path)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        info!("Config written to {}", path.display());
        return Ok(());
    }

    let input = &config.input.path;
    let output = OrderPipeline::standard()
        .run(input)
        .with_context(|| format!("Failed to rank orders in {}", input.display()))?;

    let report = TopItemsReport::new(input.clone(), &output, config.report.top);
    let rendered = report.render(config.report.format)?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }

    if let Some(path) = &cli.output {
        report
            .save(path, config.report.format)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!("Report written to {}", path.display());
    }

    Ok(())
}
