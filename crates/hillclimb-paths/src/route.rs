use std::fmt;

use hillclimb_core::Point;

use crate::neighbors::Neighbors;
use crate::search::{DistanceMap, SearchError};
use crate::traits::WeightedPather;

/// One shortest route, stored from destination back to source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    points: Vec<Point>,
}

impl Route {
    /// Points from destination back to source.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Points from source to destination.
    pub fn forward(&self) -> impl DoubleEndedIterator<Item = Point> + '_ {
        self.points.iter().rev().copied()
    }

    /// The same cells with source and destination swapped.
    pub fn reversed(mut self) -> Self {
        self.points.reverse();
        self
    }

    /// Number of steps (one less than the number of points).
    pub fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Number of points, both endpoints included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never `true` for a reconstructed route.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn source(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn destination(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }
}

impl DistanceMap {
    /// Reconstruct a shortest route from the source to `to`.
    ///
    /// Walks back from `to`, at each cell stepping to the first cardinal
    /// neighbor (up, right, down, left) `n` such that `pather` allows the
    /// step `n -> current` and `distance(n) + cost == distance(current)`.
    /// `pather` must be the one the map was computed with.
    pub fn route_to<P: WeightedPather>(&self, pather: &P, to: Point) -> Result<Route, RouteError> {
        if !self.rng.contains(to) {
            return Err(RouteError::OutOfBounds(to));
        }
        let Some(mut d) = self.distance(to) else {
            log::debug!("{to} is unreachable from {}", self.source);
            return Err(RouteError::Unreachable { from: self.source, to });
        };

        let mut points = Vec::with_capacity(d as usize + 1);
        points.push(to);
        let mut cur = to;
        let mut nb = Neighbors::new();

        while cur != self.source {
            // Every step lowers the distance, so a walk longer than the
            // range signals corrupted distances.
            if points.len() > self.rng.len() {
                return Err(RouteError::Broken { at: cur, distance: d });
            }
            let closer = |n: Point| self.distance(n).is_some_and(|nd| nd < d);
            let candidates = nb.cardinal(cur, closer);
            let mut prev = None;
            for &n in candidates {
                if !pather.is_step(n, cur) {
                    continue;
                }
                let nd = self.raw(n);
                if nd.saturating_add(pather.cost(n, cur)) == d {
                    prev = Some((n, nd));
                    break;
                }
            }
            let Some((n, nd)) = prev else {
                return Err(RouteError::Broken { at: cur, distance: d });
            };
            points.push(n);
            cur = n;
            d = nd;
        }

        Ok(Route { points })
    }
}

/// Errors from reconstructing a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The search itself failed.
    Search(SearchError),
    /// The destination is outside the searched range.
    OutOfBounds(Point),
    /// The destination was never reached; there is no route.
    Unreachable { from: Point, to: Point },
    /// No predecessor one step closer to the source exists at `at`.
    Broken { at: Point, distance: u32 },
}

impl RouteError {
    /// Whether this is the "no route exists" outcome rather than a failure.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }
}

impl From<SearchError> for RouteError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search(e) => write!(f, "{e}"),
            Self::OutOfBounds(p) => write!(f, "route destination {p} is outside the map"),
            Self::Unreachable { from, to } => write!(f, "no route from {from} to {to}"),
            Self::Broken { at, distance } => write!(
                f,
                "route reconstruction stuck at {at} (distance {distance}): no predecessor"
            ),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}
