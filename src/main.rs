use std::path::PathBuf;

use clap::Parser;

use readme2pdf::{ChromeRenderer, Config, CONFIG_FILENAME};

#[derive(Parser)]
#[command(name = "readme2pdf")]
#[command(about = "Convert an HTML file to PDF with clickable links")]
struct Cli {
    /// Input HTML file (defaults to README.html next to the executable)
    input: Option<PathBuf>,

    /// Output PDF file (defaults to input name with .pdf extension)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.input {
        // No arguments: the fixed-name conversion next to the executable.
        None => readme2pdf::convert().map(|_| ()),
        Some(input) => {
            let output = cli
                .output
                .unwrap_or_else(|| input.with_extension("pdf"));
            let config_path = input
                .parent()
                .map(|dir| dir.join(CONFIG_FILENAME))
                .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
            let renderer = ChromeRenderer::new(Config::load(&config_path));
            readme2pdf::convert_file(&input, &output, &renderer)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
