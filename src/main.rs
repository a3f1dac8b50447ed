mod bmr;
mod domain;
mod error;
mod macros;
mod plan;
mod server;
mod targets;
mod tdee;
mod units;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Personalized nutrition planner: BMR, TDEE, calorie targets and macros.
#[derive(Parser, Debug)]
#[command(name = "nutriplan")]
#[command(about = "Nutrition planning from biometrics, served over HTTP")]
#[command(version)]
struct Args {
    /// Port number for the web server.
    /// Can also be set via NUTRIPLAN_PORT environment variable.
    #[arg(value_name = "PORT", env = "NUTRIPLAN_PORT", default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    // Determine static directory (relative to executable or cwd)
    let static_dir = find_static_dir()?;
    println!("Static files: {}", static_dir.display());

    // Start server
    server::run_server(args.port, static_dir).await?;

    Ok(())
}

/// Finds the static directory for serving frontend files.
fn find_static_dir() -> Result<PathBuf> {
    // Try relative to current working directory
    let cwd_static = PathBuf::from("static");
    if cwd_static.is_dir() {
        return Ok(cwd_static);
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        let exe_static = exe_dir.join("static");
        if exe_static.is_dir() {
            return Ok(exe_static);
        }
    }

    // Default to cwd/static
    Ok(cwd_static)
}
