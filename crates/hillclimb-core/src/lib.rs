//! **hillclimb-core**: core types for height-map pathfinding.
//!
//! This crate provides the foundational types used across the *hillclimb*
//! workspace: geometry primitives, elevation levels, and the parsed
//! [`HeightMap`] with its start and end cells.

pub mod elevation;
pub mod geom;
pub mod heightmap;

pub use elevation::Elevation;
pub use geom::{Point, PointParseError, Range};
pub use heightmap::{END_MARKER, HeightMap, ParseError, START_MARKER};
