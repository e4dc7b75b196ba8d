//! The domain module encapsulates the core game logic. It defines the collider shapes, the
//! symmetric intersection table between them, the all-pairs broad phase, and the `Arena` whose
//! bodies react to collisions.
//!
//! By minimizing hard dependencies, this module ensures the game logic remains adaptable and
//! independent of the engine used for input and rendering.

mod arena;
mod basis;
mod broad_phase;
mod circle;
mod collision;
mod line_segment;
mod rectangle;

pub use arena::{Arena, ArenaError, Body, BodyId, BodyKind, Controls, GameConfig};
pub use basis::{Angle, Vector2};
pub use broad_phase::{colliding_pairs, CollisionPair};
pub use circle::Circle;
pub use collision::{HasCollision, Shape, ShapeError, ShapeKind};
pub use line_segment::{LineSegment, LINE_EPSILON};
pub use rectangle::{Rectangle, RotatedRectangle};
