//! 2D visualization.
//!
//! Every body is drawn as the outline of its collider. Bodies touching another body are drawn in
//! red.

use bevy::prelude::*;

use space_defence::domain::{BodyKind, GameConfig, HasCollision, Shape, Vector2};

use crate::resource::ArenaRes;

pub struct Visualizer;

impl Plugin for Visualizer {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, set_up)
            .add_systems(Update, (draw_bodies, update_text, handle_keyboard_input))
            .init_resource::<Scene>();
    }
}

#[derive(Resource, Default)]
pub struct Scene {
    show_text: bool,
    show_bounding_boxes: bool,
}

const CONTACT_COLOR: Color = Color::RED;
const BOUNDING_BOX_COLOR: Color = Color::rgba(1.0, 1.0, 1.0, 0.3);

fn set_up(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
    create_text(&mut commands);
}

fn create_text(commands: &mut Commands) {
    let text_style = TextStyle {
        font_size: 20.0,
        ..default()
    };
    commands.spawn(
        TextBundle::from_sections(vec![TextSection::new("", text_style.clone())]).with_style(
            Style {
                position_type: PositionType::Absolute,
                bottom: Val::Px(12.0),
                left: Val::Px(12.0),
                ..default()
            },
        ),
    );
}

fn draw_bodies(mut gizmos: Gizmos, scene: Res<Scene>, arena: Res<ArenaRes>) {
    let config = arena.config();

    gizmos.rect_2d(
        Vec2::ZERO,
        0.0,
        Vec2::new(config.field_width as f32, config.field_height as f32),
        Color::DARK_GRAY,
    );

    for body in arena.bodies() {
        let color = if arena.is_in_contact(body.id()) {
            CONTACT_COLOR
        } else {
            body_color(body.kind())
        };
        draw_shape(&mut gizmos, &body.shape(), config, color);

        if scene.show_bounding_boxes {
            draw_shape(
                &mut gizmos,
                &body.shape().bounding_box().into(),
                config,
                BOUNDING_BOX_COLOR,
            );
        }
    }
}

fn body_color(kind: BodyKind) -> Color {
    match kind {
        BodyKind::Ship => Color::WHITE,
        BodyKind::Asteroid => Color::GRAY,
        BodyKind::Alien { .. } => Color::GREEN,
        BodyKind::Supply => Color::YELLOW,
        BodyKind::Bullet => Color::ORANGE,
        BodyKind::Laser => Color::CYAN,
    }
}

fn draw_shape(gizmos: &mut Gizmos, shape: &Shape, config: &GameConfig, color: Color) {
    match shape {
        Shape::Circle(circle) => {
            gizmos.circle_2d(
                to_bevy_position(circle.center(), config),
                circle.radius() as f32,
                color,
            );
        }
        Shape::LineSegment(segment) => gizmos.line_2d(
            to_bevy_position(segment.start(), config),
            to_bevy_position(segment.end(), config),
            color,
        ),
        Shape::Rectangle(rectangle) => draw_outline(gizmos, rectangle.corners(), config, color),
        Shape::RotatedRectangle(rectangle) => {
            draw_outline(gizmos, rectangle.corners(), config, color)
        }
    }
}

fn draw_outline(gizmos: &mut Gizmos, corners: [Vector2; 4], config: &GameConfig, color: Color) {
    gizmos.linestrip_2d(
        corners
            .iter()
            .chain(corners.first())
            .map(|corner| to_bevy_position(*corner, config)),
        color,
    );
}

fn update_text(mut text: Query<&mut Text>, scene: Res<Scene>, arena: Res<ArenaRes>) {
    let mut text = text.single_mut();
    let game_over = if arena.is_game_over() {
        "GAME OVER, press R to restart"
    } else {
        ""
    };
    if scene.show_text {
        text.sections[0].value = format!(
            "SCORE: {}   BUFF: {:4.1} s   {game_over}",
            arena.score(),
            arena.buff_remaining().as_secs_f64()
        );
    } else {
        text.sections[0].value = game_over.to_string();
    }
}

fn handle_keyboard_input(keys: Res<ButtonInput<KeyCode>>, mut scene: ResMut<Scene>) {
    if keys.just_pressed(KeyCode::KeyT) {
        scene.show_text = !scene.show_text;
    }

    if keys.just_pressed(KeyCode::KeyB) {
        scene.show_bounding_boxes = !scene.show_bounding_boxes;
    }
}

/// The camera looks at the center of the field.
pub fn to_domain_position(position: Vec2, config: &GameConfig) -> Vector2 {
    Vector2::new(
        position.x as f64 + config.field_width / 2.0,
        position.y as f64 + config.field_height / 2.0,
    )
}

pub fn to_bevy_position(position: Vector2, config: &GameConfig) -> Vec2 {
    Vec2::new(
        (position.x() - config.field_width / 2.0) as f32,
        (position.y() - config.field_height / 2.0) as f32,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_position_conversion() {
        let config = GameConfig::default();
        assert_eq!(
            to_bevy_position(Vector2::new(640.0, 360.0), &config),
            Vec2::ZERO
        );
        assert_eq!(
            to_bevy_position(Vector2::new(0.0, 720.0), &config),
            Vec2::new(-640.0, 360.0)
        );
        assert_eq!(
            to_domain_position(Vec2::new(100.0, -60.0), &config),
            Vector2::new(740.0, 300.0)
        );
    }
}
