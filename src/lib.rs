//! Space Defence: an arcade shooter whose game logic is built on a small family of 2D collider
//! shapes with a symmetric intersection table.

pub mod domain;
