//! svg2jsx turns SVG documents into React components.

use std::io::ErrorKind;

use clap::Parser;
use svg2jsx::{
    args::{Args, Command, RunCommand},
    config::Config,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) if err.kind() == ErrorKind::NotFound => Config::default(),
        Err(err) => return Err(err.into()),
    };

    match args.command {
        Command::Convert(args) => args.run(config)?,
        Command::Serve(args) => args.run(config)?,
    }
    Ok(())
}
