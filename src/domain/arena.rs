//! Arena in which the ship, its projectiles, aliens, asteroids and supplies interact.
//!
//! Bodies spawned or despawned while a tick is in progress are queued and applied once all
//! collisions of the tick have been handled.

use std::{collections::BTreeSet, time::Duration};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use super::{
    colliding_pairs, collision::positive_extent, Angle, Circle, HasCollision, LineSegment,
    Rectangle, RotatedRectangle, Shape, ShapeError, Vector2,
};

/// Random locations are drawn until one keeps the requested clearance or this limit is reached.
const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// The ship only turns towards its velocity above this squared speed.
const MIN_TURNING_SPEED_SQUARED: f64 = 0.01;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BodyId(u64);

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum BodyKind {
    Ship,
    Asteroid,
    Alien { speed: f64 },
    Supply,
    Bullet,
    Laser,
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Body {
    id: BodyId,
    kind: BodyKind,
    shape: Shape,
    velocity: Vector2,
    time_to_live: Option<Duration>,
}

impl Body {
    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn time_to_live(&self) -> Option<Duration> {
        self.time_to_live
    }
}

impl HasCollision for Body {
    fn shape(&self) -> Shape {
        self.shape
    }
}

/// Input of a single tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Controls {
    /// Direction of acceleration. Normalized by the arena, the zero vector means no thrust.
    pub thrust: Vector2,
    pub fire: bool,
    /// Point in field coordinates the turret points at.
    pub aim: Vector2,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArenaError {
    #[error("invalid shape: {0}")]
    InvalidShape(#[from] ShapeError),
}

/// Lengths are in field units, speeds in field units per second. The field spans
/// `[0, field_width] x [0, field_height]` with the y-axis pointing up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub field_width: f64,
    pub field_height: f64,
    pub ship_width: f64,
    pub ship_height: f64,
    pub ship_acceleration: f64,
    /// Factor applied to the ship's velocity once per tick.
    pub ship_friction: f64,
    pub buff_duration: Duration,
    pub bullet_radius: f64,
    pub bullet_speed: f64,
    pub bullet_lifetime: Duration,
    pub laser_length: f64,
    pub laser_lifetime: Duration,
    pub alien_radius: f64,
    pub alien_initial_speed: f64,
    pub alien_speed_increment: f64,
    /// An alien closer than this to the ship's center ends the game.
    pub alien_player_clearance: f64,
    pub alien_spawn_clearance: f64,
    pub supply_width: f64,
    pub supply_height: f64,
    pub supply_player_clearance: f64,
    pub asteroid_count: usize,
    pub asteroid_radius: f64,
    pub asteroid_player_clearance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 1280.0,
            field_height: 720.0,
            ship_width: 30.0,
            ship_height: 60.0,
            ship_acceleration: 600.0,
            ship_friction: 0.98,
            buff_duration: Duration::from_secs(10),
            bullet_radius: 4.0,
            bullet_speed: 600.0,
            bullet_lifetime: Duration::from_secs(2),
            laser_length: 1280.0,
            laser_lifetime: Duration::from_millis(150),
            alien_radius: 20.0,
            alien_initial_speed: 50.0,
            alien_speed_increment: 10.0,
            alien_player_clearance: 50.0,
            alien_spawn_clearance: 300.0,
            supply_width: 40.0,
            supply_height: 40.0,
            supply_player_clearance: 100.0,
            asteroid_count: 4,
            asteroid_radius: 40.0,
            asteroid_player_clearance: 200.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Arena {
    config: GameConfig,
    rng: ChaCha8Rng,
    bodies: Vec<Body>,
    to_be_added: Vec<Body>,
    to_be_removed: BTreeSet<BodyId>,
    next_id: u64,
    buff_remaining: Duration,
    score: u32,
    is_game_over: bool,
    in_contact: BTreeSet<BodyId>,
}

impl Arena {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ArenaError> {
        positive_extent("field width", config.field_width)?;
        positive_extent("field height", config.field_height)?;

        let mut arena = Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            bodies: vec![],
            to_be_added: vec![],
            to_be_removed: BTreeSet::new(),
            next_id: 0,
            buff_remaining: config.buff_duration,
            score: 0,
            is_game_over: false,
            in_contact: BTreeSet::new(),
        };
        arena.restart()?;
        Ok(arena)
    }

    /// Removes all bodies and sets up a new game. The random generator is not reseeded.
    pub fn restart(&mut self) -> Result<(), ArenaError> {
        self.bodies.clear();
        self.to_be_added.clear();
        self.to_be_removed.clear();
        self.in_contact.clear();
        self.buff_remaining = self.config.buff_duration;
        self.score = 0;
        self.is_game_over = false;

        let field_center = Vector2::new(self.config.field_width, self.config.field_height) * 0.5;
        self.spawn(
            BodyKind::Ship,
            RotatedRectangle::new(
                field_center,
                self.config.ship_width,
                self.config.ship_height,
                Angle::default(),
            )?
            .into(),
            Vector2::ZERO,
            None,
        );
        self.flush();

        for _ in 0..self.config.asteroid_count {
            let center = self.random_location(self.config.asteroid_player_clearance);
            let asteroid = Circle::new(center, self.config.asteroid_radius)?;
            self.spawn(BodyKind::Asteroid, asteroid.into(), Vector2::ZERO, None);
        }

        let center = self.random_location(self.config.supply_player_clearance);
        let supply = Rectangle::new(center, self.config.supply_width, self.config.supply_height)?;
        self.spawn(BodyKind::Supply, supply.into(), Vector2::ZERO, None);

        self.spawn_alien(self.config.alien_initial_speed)?;
        self.flush();

        log::info!("arena restarted with {} bodies", self.bodies.len());

        Ok(())
    }

    /// Advances the game by `dt`. A finished game ignores ticks until it is restarted.
    pub fn tick(&mut self, dt: Duration, controls: &Controls) -> Result<(), ArenaError> {
        if self.is_game_over {
            return Ok(());
        }

        self.buff_remaining = self.buff_remaining.saturating_sub(dt);

        self.steer_ship(dt.as_secs_f64(), controls.thrust);
        if controls.fire {
            self.fire(controls.aim)?;
        }
        self.move_bodies(dt);
        self.react_to_collisions()?;
        self.flush();

        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn ship(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.kind == BodyKind::Ship)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn buff_remaining(&self) -> Duration {
        self.buff_remaining
    }

    /// While buffed the ship fires lasers instead of bullets.
    pub fn is_buffed(&self) -> bool {
        !self.buff_remaining.is_zero()
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Whether the body touched another body during the last tick.
    pub fn is_in_contact(&self, id: BodyId) -> bool {
        self.in_contact.contains(&id)
    }

    fn steer_ship(&mut self, dt: f64, thrust: Vector2) {
        let Some(ship) = self.bodies.iter_mut().find(|b| b.kind == BodyKind::Ship) else {
            return;
        };

        if let Some(direction) = thrust.normalize() {
            ship.velocity += direction * (self.config.ship_acceleration * dt);
        }
        ship.velocity *= self.config.ship_friction;

        if ship.velocity.length_squared() > MIN_TURNING_SPEED_SQUARED {
            if let Shape::RotatedRectangle(ref mut rectangle) = ship.shape {
                rectangle.set_rotation(LineSegment::angle_of(ship.velocity));
            }
        }
    }

    fn fire(&mut self, aim: Vector2) -> Result<(), ArenaError> {
        let Some(center) = self.ship().map(|ship| ship.shape.center()) else {
            return Ok(());
        };

        let direction = LineSegment::direction_between(center, aim);
        if direction == Vector2::ZERO {
            return Ok(());
        }
        let exit = center + direction * (self.config.ship_width / 2.0);

        if self.is_buffed() {
            let laser = LineSegment::from_direction(exit, direction, self.config.laser_length);
            self.spawn(
                BodyKind::Laser,
                laser.into(),
                Vector2::ZERO,
                Some(self.config.laser_lifetime),
            );
        } else {
            let bullet = Circle::new(exit, self.config.bullet_radius)?;
            self.spawn(
                BodyKind::Bullet,
                bullet.into(),
                direction * self.config.bullet_speed,
                Some(self.config.bullet_lifetime),
            );
        }

        Ok(())
    }

    fn move_bodies(&mut self, dt: Duration) {
        let seconds = dt.as_secs_f64();
        let ship_center = self.ship().map(|ship| ship.shape.center());

        for body in &mut self.bodies {
            if let (BodyKind::Alien { speed }, Some(target)) = (body.kind, ship_center) {
                body.velocity = LineSegment::direction_between(body.shape.center(), target) * speed;
            }

            body.shape.translate(body.velocity * seconds);

            if body.kind == BodyKind::Ship {
                body.shape.set_center(wrap_around(
                    body.shape.center(),
                    self.config.field_width,
                    self.config.field_height,
                ));
            }

            match body.time_to_live {
                Some(time_to_live) if time_to_live <= dt => {
                    self.to_be_removed.insert(body.id);
                }
                Some(time_to_live) => body.time_to_live = Some(time_to_live - dt),
                None => {}
            }
        }

        if let Some(ship_center) = self.ship().map(|ship| ship.shape.center()) {
            let alien_too_close = self.bodies.iter().any(|b| {
                matches!(b.kind, BodyKind::Alien { .. })
                    && b.shape.center().distance(ship_center) < self.config.alien_player_clearance
            });
            if alien_too_close {
                self.game_over("an alien reached the ship");
            }
        }
    }

    fn react_to_collisions(&mut self) -> Result<(), ArenaError> {
        let pairs = colliding_pairs(&self.bodies);

        self.in_contact = pairs
            .iter()
            .flat_map(|pair| [self.bodies[pair.first].id, self.bodies[pair.second].id])
            .collect();

        for pair in pairs {
            let first = self.bodies[pair.first];
            let second = self.bodies[pair.second];
            self.react(&first, &second)?;
            self.react(&second, &first)?;
        }

        Ok(())
    }

    /// Reaction of `body` to touching `other`. Called for both orders of every colliding pair.
    fn react(&mut self, body: &Body, other: &Body) -> Result<(), ArenaError> {
        match (body.kind, other.kind) {
            (BodyKind::Asteroid, BodyKind::Ship) => {
                self.despawn(other.id);
                self.game_over("the ship crashed into an asteroid");
            }
            (BodyKind::Asteroid, BodyKind::Alien { .. }) => {
                self.despawn(other.id);
            }
            (BodyKind::Alien { speed }, BodyKind::Bullet | BodyKind::Laser) => {
                if other.kind == BodyKind::Bullet {
                    self.despawn(other.id);
                }
                if self.despawn(body.id) {
                    self.score += 1;
                    let speed = speed + self.config.alien_speed_increment;
                    self.spawn_alien(speed)?;
                    log::info!("alien destroyed, score {}, next speed {speed}", self.score);
                }
            }
            (BodyKind::Alien { .. }, BodyKind::Ship) => {
                self.game_over("an alien hit the ship");
            }
            (BodyKind::Supply, BodyKind::Ship) => {
                let center = self.random_location(self.config.supply_player_clearance);
                if let Some(supply) = self.bodies.iter_mut().find(|b| b.id == body.id) {
                    supply.shape.set_center(center);
                }
                self.buff_remaining = self.config.buff_duration;
                log::info!("supply picked up");
            }
            _ => {}
        }

        Ok(())
    }

    fn spawn_alien(&mut self, speed: f64) -> Result<BodyId, ArenaError> {
        let center = self.random_location(self.config.alien_spawn_clearance);
        let alien = Circle::new(center, self.config.alien_radius)?;
        Ok(self.spawn(
            BodyKind::Alien { speed },
            alien.into(),
            Vector2::ZERO,
            None,
        ))
    }

    /// Queues a new body. It takes part in the game from the end of the current tick.
    fn spawn(
        &mut self,
        kind: BodyKind,
        shape: Shape,
        velocity: Vector2,
        time_to_live: Option<Duration>,
    ) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.to_be_added.push(Body {
            id,
            kind,
            shape,
            velocity,
            time_to_live,
        });
        id
    }

    /// Queues a body for removal. Returns `false` if it was already queued.
    fn despawn(&mut self, id: BodyId) -> bool {
        self.to_be_removed.insert(id)
    }

    fn flush(&mut self) {
        let removed = std::mem::take(&mut self.to_be_removed);
        self.bodies.retain(|b| !removed.contains(&b.id));
        self.bodies.append(&mut self.to_be_added);
    }

    fn game_over(&mut self, reason: &str) {
        if !self.is_game_over {
            log::info!("game over: {reason}, score {}", self.score);
            self.is_game_over = true;
        }
    }

    /// Random point of the field at least `clearance` away from the ship. Falls back to the last
    /// candidate if no such point is found.
    fn random_location(&mut self, clearance: f64) -> Vector2 {
        let ship_center = self.ship().map(|ship| ship.shape.center());
        let mut location = Vector2::ZERO;

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            location = Vector2::new(
                self.rng.random_range(0.0..=self.config.field_width),
                self.rng.random_range(0.0..=self.config.field_height),
            );
            if ship_center.map_or(true, |center| location.distance(center) >= clearance) {
                break;
            }
        }

        location
    }
}

fn wrap_around(point: Vector2, width: f64, height: f64) -> Vector2 {
    let wrap = |value: f64, max: f64| {
        if value < 0.0 {
            max
        } else if value > max {
            0.0
        } else {
            value
        }
    };
    Vector2::new(wrap(point.x(), width), wrap(point.y(), height))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const SEED: u64 = 7;
    const FRAME: Duration = Duration::from_millis(16);

    fn ship(x: f64, y: f64) -> (BodyKind, Shape) {
        (
            BodyKind::Ship,
            RotatedRectangle::new(Vector2::new(x, y), 30.0, 60.0, Angle::default())
                .unwrap()
                .into(),
        )
    }

    fn circle(kind: BodyKind, x: f64, y: f64, radius: f64) -> (BodyKind, Shape) {
        (kind, Circle::new(Vector2::new(x, y), radius).unwrap().into())
    }

    fn arena(bodies: &[(BodyKind, Shape)]) -> Arena {
        let mut arena = Arena::new(GameConfig::default(), SEED).unwrap();
        arena.bodies.clear();
        for &(kind, shape) in bodies {
            arena.spawn(kind, shape, Vector2::ZERO, None);
        }
        arena.flush();
        arena
    }

    fn count(arena: &Arena, kind: BodyKind) -> usize {
        arena.bodies().iter().filter(|b| b.kind() == kind).count()
    }

    fn aliens(arena: &Arena) -> Vec<&Body> {
        arena
            .bodies()
            .iter()
            .filter(|b| matches!(b.kind(), BodyKind::Alien { .. }))
            .collect()
    }

    #[test]
    fn test_arena_new() {
        let arena = Arena::new(GameConfig::default(), SEED).unwrap();
        let config = arena.config();
        let ship_center = arena.ship().unwrap().shape().center();

        assert_eq!(count(&arena, BodyKind::Ship), 1);
        assert_eq!(count(&arena, BodyKind::Asteroid), config.asteroid_count);
        assert_eq!(count(&arena, BodyKind::Supply), 1);
        assert_eq!(aliens(&arena).len(), 1);
        assert_eq!(ship_center, Vector2::new(640.0, 360.0));
        assert_eq!(arena.score(), 0);
        assert!(arena.is_buffed());
        assert!(!arena.is_game_over());

        for body in arena.bodies() {
            let center = body.shape().center();
            assert!((0.0..=config.field_width).contains(&center.x()));
            assert!((0.0..=config.field_height).contains(&center.y()));
        }
        for alien in aliens(&arena) {
            assert!(alien.shape().center().distance(ship_center) >= config.alien_spawn_clearance);
        }
    }

    #[test]
    fn test_arena_is_deterministic() {
        let controls = Controls {
            thrust: Vector2::new(1.0, 0.5),
            fire: true,
            aim: Vector2::new(0.0, 0.0),
        };
        let mut a = Arena::new(GameConfig::default(), SEED).unwrap();
        let mut b = Arena::new(GameConfig::default(), SEED).unwrap();
        for _ in 0..30 {
            a.tick(FRAME, &controls).unwrap();
            b.tick(FRAME, &controls).unwrap();
        }
        assert_eq!(a.bodies(), b.bodies());

        let c = Arena::new(GameConfig::default(), SEED + 1).unwrap();
        assert_ne!(
            Arena::new(GameConfig::default(), SEED).unwrap().bodies(),
            c.bodies()
        );
    }

    #[test]
    fn test_arena_restart() {
        let mut arena = arena(&[
            ship(100.0, 100.0),
            circle(BodyKind::Asteroid, 100.0, 100.0, 40.0),
        ]);
        arena.tick(FRAME, &Controls::default()).unwrap();
        assert!(arena.is_game_over());

        arena.restart().unwrap();
        assert!(!arena.is_game_over());
        assert_eq!(count(&arena, BodyKind::Ship), 1);
        assert_eq!(aliens(&arena).len(), 1);
    }

    #[test]
    fn test_bullet_hits_alien() {
        let mut arena = arena(&[
            ship(100.0, 100.0),
            circle(BodyKind::Alien { speed: 50.0 }, 600.0, 100.0, 20.0),
            circle(BodyKind::Bullet, 600.0, 100.0, 4.0),
        ]);

        arena.tick(FRAME, &Controls::default()).unwrap();

        assert_eq!(arena.score(), 1);
        assert_eq!(count(&arena, BodyKind::Bullet), 0);
        let aliens = aliens(&arena);
        assert_eq!(aliens.len(), 1);
        assert_eq!(aliens[0].kind(), BodyKind::Alien { speed: 60.0 });
        assert!(aliens[0].shape().center().distance(Vector2::new(100.0, 100.0)) >= 300.0);
    }

    #[test]
    fn test_laser_hits_alien_and_remains() {
        let mut arena = arena(&[
            ship(100.0, 100.0),
            circle(BodyKind::Alien { speed: 50.0 }, 600.0, 100.0, 20.0),
            (
                BodyKind::Laser,
                LineSegment::new(Vector2::new(600.0, 0.0), Vector2::new(600.0, 700.0)).into(),
            ),
        ]);

        arena.tick(FRAME, &Controls::default()).unwrap();

        assert_eq!(arena.score(), 1);
        assert_eq!(count(&arena, BodyKind::Laser), 1);
    }

    #[test]
    fn test_asteroid_ends_game() {
        let mut arena = arena(&[
            ship(100.0, 100.0),
            circle(BodyKind::Asteroid, 100.0, 140.0, 40.0),
        ]);

        arena.tick(FRAME, &Controls::default()).unwrap();

        assert!(arena.is_game_over());
        assert!(arena.ship().is_none());

        let bodies = arena.bodies().to_vec();
        arena
            .tick(
                FRAME,
                &Controls {
                    fire: true,
                    ..Controls::default()
                },
            )
            .unwrap();
        assert_eq!(arena.bodies(), bodies.as_slice());
    }

    #[test]
    fn test_asteroid_destroys_alien() {
        let mut arena = arena(&[
            ship(100.0, 100.0),
            circle(BodyKind::Asteroid, 600.0, 100.0, 40.0),
            circle(BodyKind::Alien { speed: 50.0 }, 650.0, 100.0, 20.0),
        ]);

        arena.tick(FRAME, &Controls::default()).unwrap();

        assert!(aliens(&arena).is_empty());
        assert_eq!(arena.score(), 0);
        assert!(!arena.is_game_over());
    }

    #[test]
    fn test_alien_chases_ship() {
        let mut arena = arena(&[
            ship(100.0, 100.0),
            circle(BodyKind::Alien { speed: 50.0 }, 500.0, 100.0, 20.0),
        ]);

        arena.tick(Duration::from_secs(1), &Controls::default()).unwrap();

        assert_abs_diff_eq!(
            aliens(&arena)[0].shape().center(),
            Vector2::new(450.0, 100.0),
            epsilon = 1e-9
        );
        assert!(!arena.is_game_over());
    }

    #[test]
    fn test_alien_within_clearance_ends_game() {
        let mut arena = arena(&[
            ship(100.0, 100.0),
            circle(BodyKind::Alien { speed: 50.0 }, 160.0, 100.0, 20.0),
        ]);

        arena.tick(Duration::from_millis(500), &Controls::default()).unwrap();

        assert!(arena.is_game_over());
    }

    #[test]
    fn test_supply_buffs_ship() {
        let mut arena = arena(&[
            ship(100.0, 100.0),
            (
                BodyKind::Supply,
                Rectangle::new(Vector2::new(100.0, 130.0), 40.0, 40.0)
                    .unwrap()
                    .into(),
            ),
        ]);
        arena.buff_remaining = Duration::ZERO;
        assert!(!arena.is_buffed());

        arena.tick(FRAME, &Controls::default()).unwrap();

        assert_eq!(arena.buff_remaining(), arena.config().buff_duration);
        let supply = arena
            .bodies()
            .iter()
            .find(|b| b.kind() == BodyKind::Supply)
            .unwrap();
        let ship_center = arena.ship().unwrap().shape().center();
        assert!(supply.shape().center().distance(ship_center) >= 100.0);
        assert!(arena.is_in_contact(supply.id()));
    }

    #[test]
    fn test_ship_wraps_around_field() {
        let mut arena = arena(&[ship(1279.0, 360.0)]);
        arena.bodies[0].velocity = Vector2::new(600.0, 0.0);

        arena.tick(FRAME, &Controls::default()).unwrap();

        assert_abs_diff_eq!(
            arena.ship().unwrap().shape().center(),
            Vector2::new(0.0, 360.0)
        );
    }

    #[test]
    fn test_ship_heading_follows_velocity() {
        let mut arena = arena(&[ship(640.0, 360.0)]);
        let controls = Controls {
            thrust: Vector2::new(1.0, 0.0),
            ..Controls::default()
        };

        for _ in 0..10 {
            arena.tick(FRAME, &controls).unwrap();
        }

        let ship = arena.ship().unwrap();
        assert!(ship.velocity().x() > 0.0);
        assert!(ship.shape().center().x() > 640.0);
        let Shape::RotatedRectangle(rectangle) = ship.shape() else {
            panic!("ship is not a rotated rectangle");
        };
        assert_abs_diff_eq!(f64::from(rectangle.rotation()), -0.5 * PI, epsilon = 1e-12);
    }

    #[rstest]
    #[case::bullet(Duration::ZERO, BodyKind::Bullet)]
    #[case::laser(Duration::from_secs(5), BodyKind::Laser)]
    fn test_fire(#[case] buff_remaining: Duration, #[case] expected: BodyKind) {
        let mut arena = arena(&[ship(640.0, 360.0)]);
        arena.buff_remaining = buff_remaining;

        arena
            .tick(
                FRAME,
                &Controls {
                    fire: true,
                    aim: Vector2::new(740.0, 360.0),
                    ..Controls::default()
                },
            )
            .unwrap();

        let projectiles = arena
            .bodies()
            .iter()
            .filter(|b| b.kind() != BodyKind::Ship)
            .collect::<Vec<_>>();
        assert_eq!(projectiles.len(), 1);
        assert_eq!(projectiles[0].kind(), expected);

        match projectiles[0].shape() {
            Shape::Circle(bullet) => {
                assert_abs_diff_eq!(bullet.center(), Vector2::new(655.0, 360.0));
                assert_abs_diff_eq!(projectiles[0].velocity(), Vector2::new(600.0, 0.0));
            }
            Shape::LineSegment(laser) => {
                assert_abs_diff_eq!(laser.start(), Vector2::new(655.0, 360.0));
                assert_abs_diff_eq!(laser.length(), 1280.0, epsilon = 1e-9);
            }
            shape => panic!("unexpected projectile {shape:?}"),
        }
    }

    #[test]
    fn test_fire_at_ship_center() {
        let mut arena = arena(&[ship(640.0, 360.0)]);
        arena
            .tick(
                FRAME,
                &Controls {
                    fire: true,
                    aim: Vector2::new(640.0, 360.0),
                    ..Controls::default()
                },
            )
            .unwrap();
        assert_eq!(arena.bodies().len(), 1);
    }

    #[test]
    fn test_laser_expires() {
        let mut arena = arena(&[ship(640.0, 360.0)]);
        arena
            .tick(
                FRAME,
                &Controls {
                    fire: true,
                    aim: Vector2::new(640.0, 700.0),
                    ..Controls::default()
                },
            )
            .unwrap();
        assert_eq!(count(&arena, BodyKind::Laser), 1);

        arena
            .tick(Duration::from_millis(100), &Controls::default())
            .unwrap();
        assert_eq!(count(&arena, BodyKind::Laser), 1);

        arena
            .tick(Duration::from_millis(100), &Controls::default())
            .unwrap();
        assert_eq!(count(&arena, BodyKind::Laser), 0);
    }

    #[rstest]
    #[case::zero_ship_width(GameConfig {
        ship_width: 0.0,
        ..GameConfig::default()
    })]
    #[case::negative_field_width(GameConfig {
        field_width: -10.0,
        ..GameConfig::default()
    })]
    #[case::nan_field_height(GameConfig {
        field_height: f64::NAN,
        ..GameConfig::default()
    })]
    fn test_invalid_config(#[case] config: GameConfig) {
        assert!(matches!(
            Arena::new(config, SEED),
            Err(ArenaError::InvalidShape(ShapeError::NonPositiveExtent { .. }))
        ));
    }

    #[test]
    fn test_wrap_around() {
        assert_eq!(
            wrap_around(Vector2::new(-1.0, 721.0), 1280.0, 720.0),
            Vector2::new(1280.0, 0.0)
        );
        assert_eq!(
            wrap_around(Vector2::new(5.0, 6.0), 1280.0, 720.0),
            Vector2::new(5.0, 6.0)
        );
    }
}
