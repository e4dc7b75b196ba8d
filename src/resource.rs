//! The resource module encapsulates domain entities for use with Bevy.

use std::ops::{Deref, DerefMut};

use bevy::ecs::system::Resource;

use space_defence::domain;

#[derive(Resource)]
pub struct ArenaRes(domain::Arena);

impl Deref for ArenaRes {
    type Target = domain::Arena;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ArenaRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<domain::Arena> for ArenaRes {
    fn from(value: domain::Arena) -> Self {
        Self(value)
    }
}

/// Input collected during the current frame.
#[derive(Resource, Default)]
pub struct ControlsRes(domain::Controls);

impl Deref for ControlsRes {
    type Target = domain::Controls;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ControlsRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
