use clap::Parser;
use codesim::cli;
use codesim::errors::CompareError;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => exit_with(CompareError::Usage(e.render().to_string())),
        Err(e) => e.exit(),
    };

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::compare::handle_compare(&cli) {
        exit_with(e);
    }
}

fn exit_with(err: CompareError) -> ! {
    let class = err.classify();
    debug!(error_type = class.error_type, exit_code = class.exit_code, "Comparison failed");
    match &err {
        CompareError::Usage(usage) => eprint!("{}", usage),
        _ => eprintln!("Error: {}", err),
    }
    std::process::exit(class.exit_code)
}
