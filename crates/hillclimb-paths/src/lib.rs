//! Shortest-path search over height maps.
//!
//! This crate computes fewest-step routes across a
//! [`HeightMap`](hillclimb_core::HeightMap) where each step may climb at most
//! one elevation level:
//!
//! - **Traversal rules** ([`TraversalRule::Climb`], [`TraversalRule::Descend`])
//!   wrapped as a [`Pather`] by [`HeightPather`]
//! - **Dijkstra** single-source distance maps ([`DistanceMap::compute`])
//! - **Route reconstruction** from a distance map ([`DistanceMap::route_to`])
//! - **Lowest-start queries** answered with one reverse search
//!   ([`lowest_start`], [`lowest_starts`])
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration, route reconstruction |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |

mod neighbors;
mod query;
mod route;
mod rule;
mod search;
mod traits;

pub use neighbors::Neighbors;
pub use query::{
    StartCandidate, best_start, climb, descent_field, descent_route, lowest_start, lowest_starts,
    rank_lowest,
};
pub use route::{Route, RouteError};
pub use rule::{HeightPather, TraversalRule};
pub use search::{DistanceMap, PathNode, SearchError, UNREACHABLE};
pub use traits::{Pather, WeightedPather};
