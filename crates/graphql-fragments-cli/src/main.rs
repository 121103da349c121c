#![cfg_attr(test, allow(unused_crate_dependencies))]

use args::Args;
use clap::{crate_version, Parser};
use tracing_subscriber::EnvFilter;

mod args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_env("GQLFRAG_RUST_LOG").unwrap_or_else(|_| EnvFilter::new(args.log_level.as_filter_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let crate_version = crate_version!();
    tracing::info!("gqlfrag {crate_version}");

    let graph = args.graph()?;
    let expansion = args.expansion()?;

    let fragment = match &args.name {
        Some(name) => graph.fragment_definition(name, &args.type_name, &expansion)?,
        None => graph.fragment(&args.type_name, &expansion)?,
    };

    println!("{fragment}");

    Ok(())
}
