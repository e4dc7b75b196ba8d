//! Controller steering the ship.
//!
//! The ship accelerates with W, A, S and D, the turret follows the mouse cursor and the left mouse
//! button fires. R restarts the game.

use bevy::{prelude::*, window::PrimaryWindow};

use space_defence::domain::Vector2;

use crate::{
    resource::{ArenaRes, ControlsRes},
    visualizer::to_domain_position,
};

pub struct Controller;

impl Plugin for Controller {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlsRes>()
            .add_systems(Update, (control, handle_restart));
    }
}

const THRUST_KEYS: [(KeyCode, Vector2); 4] = [
    (KeyCode::KeyW, Vector2::new(0.0, 1.0)),
    (KeyCode::KeyS, Vector2::new(0.0, -1.0)),
    (KeyCode::KeyA, Vector2::new(-1.0, 0.0)),
    (KeyCode::KeyD, Vector2::new(1.0, 0.0)),
];

pub fn control(
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    windows: Query<&Window, With<PrimaryWindow>>,
    arena: Res<ArenaRes>,
    mut controls: ResMut<ControlsRes>,
) {
    controls.thrust = THRUST_KEYS
        .iter()
        .filter(|(key, _)| keys.pressed(*key))
        .fold(Vector2::ZERO, |thrust, (_, direction)| thrust + *direction);

    controls.fire = buttons.just_pressed(MouseButton::Left);

    if let Some(position) = get_cursor_position(&cameras, &windows) {
        controls.aim = to_domain_position(position, arena.config());
    }
}

fn handle_restart(keys: Res<ButtonInput<KeyCode>>, mut arena: ResMut<ArenaRes>) {
    if keys.just_pressed(KeyCode::KeyR) {
        if let Err(error) = arena.restart() {
            error!("failed to restart: {error}");
        }
    }
}

fn get_cursor_position(
    cameras: &Query<(&Camera, &GlobalTransform)>,
    windows: &Query<&Window, With<PrimaryWindow>>,
) -> Option<Vec2> {
    let (camera, camera_transform) = cameras.get_single().ok()?;
    let cursor_position = windows.get_single().ok()?.cursor_position()?;
    camera.viewport_to_world_2d(camera_transform, cursor_position)
}
