//! Simulation of the arena.
//!
//! The arena advances by the frame time using the input collected by the controller in the same
//! frame.

use bevy::prelude::*;

use crate::{
    controller,
    resource::{ArenaRes, ControlsRes},
};

pub struct Simulator;

impl Plugin for Simulator {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, simulate.after(controller::control));
    }
}

fn simulate(time: Res<Time>, controls: Res<ControlsRes>, mut arena: ResMut<ArenaRes>) {
    if let Err(error) = arena.tick(time.delta(), &controls) {
        error!("failed to advance the arena: {error}");
    }
}
