//! Penrose P2 tilings made of Robinson triangles.
//!
//! A five-fold "sun" of acute triangles is repeatedly deflated; every
//! triangle then yields the primitives needed to draw its body, its
//! outline and the two arcs that expose the matching rule.

// bunch of modules, leaf first
#[macro_use]
extern crate error_chain;

pub mod errors;
pub mod geometry;
pub mod triangle;
pub mod tiling;
pub mod config;
pub mod render;

pub use config::{SeedRadius, TilingConfig};
pub use geometry::{angle_of, arc_geometry, ArcGeometry, Point2d, Vec2d, PHI};
pub use tiling::{Action, Tiling};
pub use triangle::{ArcStroke, Body, Color, Outline, Triangle, Variant};
