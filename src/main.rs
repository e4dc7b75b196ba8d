use bevy::prelude::*;

use space_defence::domain::{Arena, ArenaError, GameConfig};

mod controller;
mod resource;
mod simulator;
mod visualizer;

const RNG_SEED: u64 = 19878367467712;

fn main() -> Result<(), ArenaError> {
    let arena = Arena::new(GameConfig::default(), RNG_SEED)?;

    App::new()
        .add_plugins(DefaultPlugins)
        .insert_resource(resource::ArenaRes::from(arena))
        .add_plugins(controller::Controller)
        .add_plugins(visualizer::Visualizer)
        .add_plugins(simulator::Simulator)
        .run();

    Ok(())
}
