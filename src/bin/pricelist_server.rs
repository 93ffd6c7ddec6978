//! Price-list upload server binary

use aqua_pricelist::api::{run_api_server, ApiConfig};
use aqua_pricelist::images::DEFAULT_IMAGES_DIR;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pricelist-server")]
#[command(version)]
#[command(about = "Upload form and HTTP API for converting aquarium shop price lists")]
#[command(long_about = r#"
Price-list upload server

Endpoints:
  - GET  /                 - Upload form (multipart field "file")
  - POST /upload           - Convert and redirect back to the form with a message
  - POST /api/v1/convert   - Convert and return the result as JSON
  - GET  /health           - Health check
  - GET  /version          - Server version info

Example usage:
  pricelist-server                                  # Start on localhost:8080
  pricelist-server --host 0.0.0.0 --port 3000 --images-dir /srv/csv

  curl -F file=@price.xlsx http://localhost:8080/api/v1/convert
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "PRICELIST_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "PRICELIST_PORT")]
    port: u16,

    /// Directory with <category>.csv image lookup files
    #[arg(short, long, default_value = DEFAULT_IMAGES_DIR, env = "PRICELIST_IMAGES_DIR")]
    images_dir: PathBuf,

    /// Largest accepted upload in megabytes
    #[arg(long, default_value = "20", env = "PRICELIST_MAX_UPLOAD_MB")]
    max_upload_mb: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        images_dir: args.images_dir,
        max_upload_bytes: args.max_upload_mb * 1024 * 1024,
    };

    run_api_server(config).await
}
