use crate::core::PriceListConverter;
use crate::error::PriceListResult;
use crate::images::ImageLibrary;
use crate::types::{Category, ConversionResult};
use clap::ValueEnum;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Serialization used for conversion output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    /// Pick a format from an output file extension, if it names one
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }
}

/// Render a conversion result
pub fn render(result: &ConversionResult, format: OutputFormat) -> PriceListResult<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Yaml => serde_yaml::to_string(result)?,
    })
}

/// Execute the convert command
pub fn convert(
    input: PathBuf,
    images_dir: PathBuf,
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
    verbose: bool,
) -> PriceListResult<()> {
    let format = format
        .or_else(|| output.as_deref().and_then(OutputFormat::from_extension))
        .unwrap_or_default();

    let converter = PriceListConverter::from_images_dir(&images_dir)?;
    let result = converter.convert_file(&input)?;
    let rendered = render(&result, format)?;

    let Some(output) = output else {
        println!("{}", rendered);
        return Ok(());
    };

    fs::write(&output, rendered)?;

    println!("{}", "🐟 Price list converted".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    if verbose {
        for summary in result.summary() {
            println!(
                "   📦 {:<14} {} titles, {} products",
                summary.category.display_name().bright_blue(),
                summary.titles,
                summary.products
            );
        }
        println!();
    }

    println!("   Total: {} products", result.product_count());
    Ok(())
}

/// Execute the image command: show what an article resolves to
pub fn image(category: Category, article: String, images_dir: PathBuf) -> PriceListResult<()> {
    let library = ImageLibrary::load_dir(&images_dir)?;
    println!("{}", library.lookup(category, &article));
    Ok(())
}
