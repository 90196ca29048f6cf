/*

Render a Penrose P2 "sun" tiling to PNG or PDF.

usage: penrose_rs [CONFIGFILE]

 */

#[macro_use]
extern crate error_chain;

use log::info;

use penrose_rs::errors::*;
use penrose_rs::render;
use penrose_rs::{Tiling, TilingConfig};

//////////////////////////////////////////////////////////////////////

fn run() -> Result<()> {

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 {
        eprintln!("usage: {:?} [CONFIGFILE]", args[0]);
        std::process::exit(1);
    }

    let config = match args.get(1) {
        Some(filename) => TilingConfig::load(filename)?,
        None => TilingConfig::new()
    };

    info!("seed radius {:}, initial depth {:}",
          config.seed_radius()?, config.initial_depth()?);

    let mut tiling = Tiling::from_config(&config)?;

    for &action in config.actions() {
        info!("{:?}", action);
        tiling.apply(action);
    }

    render::write_output(&tiling, &config)?;

    Ok(())

}

quick_main!(run);
