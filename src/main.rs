use aqua_pricelist::cli::{self, OutputFormat};
use aqua_pricelist::error::PriceListResult;
use aqua_pricelist::images::DEFAULT_IMAGES_DIR;
use aqua_pricelist::types::Category;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pricelist")]
#[command(about = "Convert aquarium shop price-list workbooks into categorized product records.")]
#[command(long_about = "Pricelist - aquarium shop price-list converter

Reads a five-sheet workbook (fish, equipment, feed, chemistry, aquariums),
groups every product under its category/subcategory title and attaches
an image URL from per-category lookup files.

WORKBOOK LAYOUT:
  Sheet 1  Fish        article in column B, titles in column A, data from row 4
  Sheet 2  Equipment   article | name | description | producer | price
  Sheet 3  Feed        article | name | description | weight   | price
  Sheet 4  Chemistry   article | name | capacity    | description | price
  Sheet 5  Aquariums   article | name | capacity    | description | price

  Titles on sheets 2-5 start with ~ (category) or * (subcategory).

IMAGE FILES:
  <images-dir>/<category>.csv, one 'article|url' pair per line.
  Missing files are fine; unmatched articles get a placeholder image.

EXAMPLES:
  pricelist convert price.xlsx                      # JSON to stdout
  pricelist convert price.xlsx -o catalog.yaml      # YAML file
  pricelist image feed \"Tetra Min 100ml\"             # Resolve an image")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a price-list workbook
    Convert {
        /// Path to the workbook (.xlsx, .xls, .ods)
        file: PathBuf,

        /// Directory with <category>.csv image lookup files
        #[arg(short, long, default_value = DEFAULT_IMAGES_DIR, env = "PRICELIST_IMAGES_DIR")]
        images_dir: PathBuf,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (defaults to the output file extension, then JSON)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Show per-category counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the image URL an article resolves to
    Image {
        /// Category: fish, equipment, feed, chemistry, aquariums
        category: Category,

        /// Article or product name as written in the workbook
        article: String,

        /// Directory with <category>.csv image lookup files
        #[arg(short, long, default_value = DEFAULT_IMAGES_DIR, env = "PRICELIST_IMAGES_DIR")]
        images_dir: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "aqua_pricelist=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> PriceListResult<()> {
    match cli.command {
        Commands::Convert {
            file,
            images_dir,
            output,
            format,
            verbose,
        } => {
            init_logging(verbose);
            cli::convert(file, images_dir, output, format, verbose)
        }

        Commands::Image {
            category,
            article,
            images_dir,
        } => {
            init_logging(false);
            cli::image(category, article, images_dir)
        }
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // User-facing message, not the Debug form
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
