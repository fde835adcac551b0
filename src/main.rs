use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fieldlens::models::AppConfig;
use fieldlens::services::{centroid_report, Calibrator, FieldReader};

#[derive(Parser)]
#[command(name = "fieldlens")]
#[command(about = "Color-centroid classifier for puzzle-game field screenshots")]
struct Cli {
    /// Configuration file path
    #[arg(long, global = true, default_value = "fieldlens.yaml")]
    config: PathBuf,

    /// Override the tuning sample root folder
    #[arg(long, global = true)]
    tuning_dir: Option<PathBuf>,

    /// Persist per-cell debug crops while calibrating
    #[arg(long, global = true)]
    save_cells: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calibrate from tuning samples and print the centroid table
    Calibrate,
    /// Calibrate, then classify field images and print their grids
    Classify {
        /// Field image(s) to classify
        #[arg(short, long, required = true, num_args = 1..)]
        image: Vec<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fieldlens=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config);
    if let Some(tuning_dir) = cli.tuning_dir {
        config.tuning_dir = tuning_dir;
    }
    if cli.save_cells {
        config.save_tuning_field_image_cells = true;
    }

    match cli.command {
        Commands::Calibrate => run_calibrate(&config),
        Commands::Classify { image } => run_classify(&config, &image),
    }
}

fn run_calibrate(config: &AppConfig) -> anyhow::Result<()> {
    let centroids = Calibrator::new(config.save_tuning_field_image_cells)
        .calibrate(&config.tuning_dir)?;
    print!("{}", centroid_report(&centroids));
    Ok(())
}

fn run_classify(config: &AppConfig, images: &[PathBuf]) -> anyhow::Result<()> {
    let centroids = Calibrator::new(config.save_tuning_field_image_cells)
        .calibrate(&config.tuning_dir)?;
    let reader = FieldReader::new(centroids);

    for path in images {
        let field = reader.classify_image_file(path)?;
        tracing::info!(image = %path.display(), "Classified field");
        println!("{}", field);
    }
    Ok(())
}
