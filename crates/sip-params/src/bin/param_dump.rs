use clap::Parser;
use rvoip_sip_params::prelude::*;
use std::str::FromStr;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "param_dump")]
#[command(about = "Parse a SIP parameter list and show how it is stored and re-encoded")]
struct Args {
    /// Parameter list, e.g. ";branch=z9hG4bK776;rport;x-foo=bar"
    params: String,

    /// Header the parameters belong to (omit for a request/status line)
    #[arg(long)]
    header: Option<String>,

    /// Parser configuration as JSON
    #[arg(short, long)]
    config: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = match args.log_level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    let config = match &args.config {
        Some(json) => ParseConfig::from_json(json)?,
        None => ParseConfig::default(),
    };
    debug!(?config, "using parser config");

    let category: ParserCategory = match &args.header {
        Some(name) => ParserCategory::<()>::new(args.params.clone(), HeaderName::from_str(name)?),
        None => ParserCategory::<()>::start_line(args.params.clone()),
    }
    .with_config(config);

    let params = category.parameters();
    info!(
        context = category.error_context(),
        typed = params.typed().len(),
        extensions = params.extensions().len(),
        "parsed parameters"
    );

    println!("Typed parameters:");
    for param in params.typed() {
        println!("  {:<14} {:?}", param.name(), param.value());
    }
    println!("Extension parameters:");
    for param in params.extensions() {
        println!("  {:<14} {:?} (quoted: {})", param.name(), param.value(), param.is_quoted());
    }
    println!("Encoded: {}", category);
    println!("Hash:    {}", category.commutative_param_hash());

    Ok(())
}
