//! Naive all-pairs broad phase.

use super::{HasCollision, Shape};

/// Indices of two colliding bodies, `first < second`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CollisionPair {
    pub first: usize,
    pub second: usize,
}

/// Tests every unordered pair of `bodies` exactly once.
pub fn colliding_pairs<T: HasCollision>(bodies: &[T]) -> Vec<CollisionPair> {
    let shapes = bodies.iter().map(HasCollision::shape).collect::<Vec<Shape>>();

    let pairs = shapes
        .iter()
        .enumerate()
        .flat_map(|(first, shape)| {
            shapes
                .iter()
                .enumerate()
                .skip(first + 1)
                .filter(move |(_, other)| shape.intersects(other))
                .map(move |(second, _)| CollisionPair { first, second })
        })
        .collect::<Vec<_>>();

    log::trace!(
        "{} colliding pairs among {} bodies",
        pairs.len(),
        shapes.len()
    );

    pairs
}
