//! Height-map queries built on [`DistanceMap`].
//!
//! [`climb`] answers "fewest steps from a given cell to the end". The
//! lowest-start queries answer "fewest steps from any lowest cell to the
//! end" with a single descend-rule search from the end, instead of one climb
//! search per candidate.

use hillclimb_core::{HeightMap, Point};

use crate::route::{Route, RouteError};
use crate::rule::{HeightPather, TraversalRule};
use crate::search::{DistanceMap, SearchError};

/// A lowest-elevation cell and its distance to the end, if reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartCandidate {
    pub pos: Point,
    pub steps: Option<u32>,
}

/// Shortest climb-rule route from `from` to the map's end.
pub fn climb(map: &HeightMap, from: Point) -> Result<Route, RouteError> {
    let pather = HeightPather::new(map, TraversalRule::Climb);
    let dm = DistanceMap::compute(&pather, map.bounds(), from, Some(map.end()))?;
    dm.route_to(&pather, map.end())
}

/// Descend-rule distances from the end to every cell: the climb distance
/// from each cell to the end.
pub fn descent_field(map: &HeightMap) -> Result<DistanceMap, SearchError> {
    let pather = HeightPather::new(map, TraversalRule::Descend);
    DistanceMap::compute(&pather, map.bounds(), map.end(), None)
}

/// Every lowest cell with its distance to the end, in row-major order.
pub fn lowest_starts(map: &HeightMap) -> Result<Vec<StartCandidate>, SearchError> {
    Ok(rank_lowest(map, &descent_field(map)?))
}

/// Like [`lowest_starts`], reading distances off an existing
/// [`descent_field`].
pub fn rank_lowest(map: &HeightMap, field: &DistanceMap) -> Vec<StartCandidate> {
    map.lowest_points()
        .into_iter()
        .map(|pos| StartCandidate {
            pos,
            steps: field.distance(pos),
        })
        .collect()
}

/// The reachable candidate with the fewest steps. Ties go to the first cell
/// in row-major order.
pub fn best_start(candidates: &[StartCandidate]) -> Option<StartCandidate> {
    candidates
        .iter()
        .filter(|c| c.steps.is_some())
        .min_by_key(|c| (c.steps, c.pos))
        .copied()
}

/// The lowest cell closest to the end, or `None` if no lowest cell can
/// reach it.
pub fn lowest_start(map: &HeightMap) -> Result<Option<StartCandidate>, SearchError> {
    Ok(best_start(&lowest_starts(map)?))
}

/// Route from `from` to the end read off a [`descent_field`], in climb
/// order (source `from`, destination the end).
pub fn descent_route(
    map: &HeightMap,
    field: &DistanceMap,
    from: Point,
) -> Result<Route, RouteError> {
    let pather = HeightPather::new(map, TraversalRule::Descend);
    field.route_to(&pather, from).map(Route::reversed)
}
