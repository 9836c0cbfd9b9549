use std::collections::BinaryHeap;
use std::fmt;

use hillclimb_core::{Point, Range};

use crate::traits::WeightedPather;

/// Sentinel distance meaning "unreachable" in a [`DistanceMap`].
pub const UNREACHABLE: u32 = u32::MAX;

/// A position with an associated cost, as finalized by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: u32,
}

/// Frontier entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// smallest cost first and, among equal costs, the smallest row-major index.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    cost: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// DistanceMap
// ---------------------------------------------------------------------------

/// Single-source shortest distances over a grid rectangle.
///
/// A `DistanceMap` is the whole state of one search: the tentative distance
/// and visited flag of every cell in its range. It is produced by
/// [`compute`](Self::compute) and never touches the grid it was computed
/// over, so several searches can share one map.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    pub(crate) rng: Range,
    pub(crate) source: Point,
    pub(crate) dist: Vec<u32>,
    pub(crate) visited: Vec<bool>,
    pub(crate) reached: Vec<PathNode>,
}

impl DistanceMap {
    /// Run Dijkstra's algorithm from `source` over `rng`.
    ///
    /// The frontier cell with the smallest tentative distance is finalized
    /// first; ties go to the cell that comes first in row-major order. With
    /// a `target`, the search stops as soon as the target is finalized;
    /// otherwise it runs until the frontier is empty. Cells never reached
    /// keep [`UNREACHABLE`].
    pub fn compute<P: WeightedPather>(
        pather: &P,
        rng: Range,
        source: Point,
        target: Option<Point>,
    ) -> Result<Self, SearchError> {
        let si = rng
            .index_of(source)
            .ok_or(SearchError::SourceOutOfBounds(source))?;
        let len = rng.len();
        let mut dm = Self {
            rng,
            source,
            dist: vec![UNREACHABLE; len],
            visited: vec![false; len],
            reached: Vec::new(),
        };
        let target_idx = target.and_then(|t| rng.index_of(t));

        log::debug!("search from {source} over {rng}, target {target:?}");

        dm.dist[si] = 0;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef { idx: si, cost: 0 });

        let mut nbuf: Vec<Point> = Vec::with_capacity(4);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            // Skip stale entries.
            if dm.visited[ci] || current.cost > dm.dist[ci] {
                continue;
            }
            if dm.reached.len() >= len {
                return Err(SearchError::StepLimit { limit: len });
            }
            dm.visited[ci] = true;

            let cp = rng.point_at(ci);
            let current_cost = dm.dist[ci];
            dm.reached.push(PathNode {
                pos: cp,
                cost: current_cost,
            });
            log::trace!("finalized {cp} at {current_cost}");

            if Some(ci) == target_idx {
                break;
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = rng.index_of(np) else {
                    continue;
                };
                if dm.visited[ni] {
                    continue;
                }
                let tentative = current_cost.saturating_add(pather.cost(cp, np));
                if tentative >= dm.dist[ni] {
                    continue;
                }
                dm.dist[ni] = tentative;
                open.push(NodeRef {
                    idx: ni,
                    cost: tentative,
                });
            }
        }

        log::debug!("search from {source} finalized {} cells", dm.reached.len());
        Ok(dm)
    }

    /// The point the search started from.
    #[inline]
    pub fn source(&self) -> Point {
        self.source
    }

    /// The grid rectangle the search ran over.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Shortest distance to `p`, or `None` if `p` was not reached or lies
    /// outside the range.
    #[inline]
    pub fn distance(&self, p: Point) -> Option<u32> {
        match self.raw(p) {
            UNREACHABLE => None,
            d => Some(d),
        }
    }

    /// Tentative distance to `p`, with [`UNREACHABLE`] for cells not reached
    /// or outside the range.
    #[inline]
    pub fn raw(&self, p: Point) -> u32 {
        match self.rng.index_of(p) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    /// Whether `p` has been finalized.
    #[inline]
    pub fn is_visited(&self, p: Point) -> bool {
        self.rng.index_of(p).is_some_and(|i| self.visited[i])
    }

    /// Finalized cells, in the order they were finalized.
    pub fn reached(&self) -> &[PathNode] {
        &self.reached
    }

    /// Number of finalized cells.
    pub fn reached_count(&self) -> usize {
        self.reached.len()
    }
}

/// Errors raised by a distance search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The source is outside the searched range.
    SourceOutOfBounds(Point),
    /// More cells were about to be finalized than the range holds.
    StepLimit { limit: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceOutOfBounds(p) => write!(f, "search source {p} is outside the map"),
            Self::StepLimit { limit } => {
                write!(f, "search finalized more than {limit} cells")
            }
        }
    }
}

impl std::error::Error for SearchError {}
