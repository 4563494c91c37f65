#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, parse_config, parse_point};

    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(args.log_level())
        .init();

    let config = parse_config(&args)?;
    let (theta, sa, z) = parse_point(&args)?;

    let eos = config.build()?;
    let out = eos.summarize(theta, sa, z)?;

    crate::adapters::cli::print_output(&out, &args)?;

    Ok(())
}
