use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use zyra_codegen::SiteOptions;

/// Output directory, relative to the working directory.
const OUT_DIR: &str = "dist";

#[derive(Parser)]
#[command(name = "zyra")]
#[command(about = "Zyra: compiles .zy components into a static website")]
#[command(version)]
struct Cli {
    /// Input .zy file
    path: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let out_dir = Path::new(OUT_DIR);

    match zyra_codegen::build_file(&cli.path, out_dir, &SiteOptions::default()) {
        Ok(site) => {
            log::info!(
                "built {} component(s) from {}",
                site.components.len(),
                cli.path.display()
            );
            println!("Site generated in '{OUT_DIR}'");
            println!(
                "Open {} in a browser to view it.",
                out_dir.join("index.html").display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
