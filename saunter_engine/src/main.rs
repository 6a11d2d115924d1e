#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Saunter **
//! Room-and-object text adventure runner

use saunter_engine::data_paths::data_path;
use saunter_engine::repl::describe_room;
use saunter_engine::style::{GameStyle, normal_block};
use saunter_engine::{SAUNTER_VERSION, View, load_config, load_world, run_repl};

use anyhow::{Context, Result};
use log::info;
use textwrap::fill;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: saunter {SAUNTER_VERSION}, loading world...");
    let config = load_config(&data_path("config.toml"));
    let mut world = load_world(&config).context("while loading World")?;
    info!("World loaded successfully.");

    println!("\n{}\n", world.title.to_uppercase().title_style());
    if !world.intro.is_empty() {
        println!("{}\n", fill(&world.intro, normal_block()).description_style());
    }

    let mut view = View::new();
    describe_room(&world, &mut view)?;
    view.flush();

    info!("Starting the game!");
    run_repl(&mut world, &config)
}
