use std::path::Path;

pub static EXAMPLE_DOTENV_CONFIG: &str = r#"# Example mlconsole .env configuration file
MLCONSOLE_BACKEND_URL=http://127.0.0.1:5000
MLCONSOLE_TICK_RATE_MS=16
MLCONSOLE_LOG_OVERLAY_LINES=500
RUST_LOG=info
"#;

fn write_dotenv_example(dir: &Path) -> std::io::Result<()> {
    std::fs::write(dir.join(".env.example"), EXAMPLE_DOTENV_CONFIG)
}

/// Arguments for writing an example .env file
#[derive(clap::Args, Debug)]
#[command(version, about, long_about = None)]
pub struct InitArgs {
    /// Directory to write into
    #[arg(long, default_value = ".")]
    pub dir: std::path::PathBuf,
}

pub fn handle_init(args: InitArgs) -> std::io::Result<()> {
    write_dotenv_example(&args.dir)?;
    println!(
        "Example .env file written to {}",
        args.dir.join(".env.example").display()
    );
    Ok(())
}
