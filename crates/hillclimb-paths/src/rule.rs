//! Direction-dependent traversal over a [`HeightMap`].

use std::fmt;

use hillclimb_core::{Elevation, HeightMap, Point};

use crate::traits::{Pather, WeightedPather};

/// Which elevation changes a single step may make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TraversalRule {
    /// Step up at most [`MAX_RISE`](TraversalRule::MAX_RISE) levels; step
    /// down any amount.
    Climb,
    /// The inverse of [`Climb`](TraversalRule::Climb): step down at most
    /// one level; step up any amount. Walking a climb route backwards.
    Descend,
}

impl TraversalRule {
    /// Largest elevation change allowed in the constrained direction.
    pub const MAX_RISE: i32 = 1;

    /// Whether a step from elevation `from` to elevation `to` is legal.
    #[inline]
    pub fn allows(self, from: Elevation, to: Elevation) -> bool {
        match self {
            Self::Climb => from.rise_to(to) <= Self::MAX_RISE,
            Self::Descend => to.rise_to(from) <= Self::MAX_RISE,
        }
    }

    /// The rule that accepts exactly the reversed steps of `self`.
    #[inline]
    pub fn inverse(self) -> Self {
        match self {
            Self::Climb => Self::Descend,
            Self::Descend => Self::Climb,
        }
    }
}

impl fmt::Display for TraversalRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Climb => write!(f, "climb"),
            Self::Descend => write!(f, "descend"),
        }
    }
}

/// A [`HeightMap`] walked under one [`TraversalRule`].
///
/// Steps are 4-connected, stay inside the map, and all cost 1.
#[derive(Debug, Clone, Copy)]
pub struct HeightPather<'a> {
    map: &'a HeightMap,
    rule: TraversalRule,
}

impl<'a> HeightPather<'a> {
    pub fn new(map: &'a HeightMap, rule: TraversalRule) -> Self {
        Self { map, rule }
    }

    pub fn rule(&self) -> TraversalRule {
        self.rule
    }

    /// Whether a single step from `from` to `to` is legal: both on the map,
    /// cardinally adjacent, and allowed by the rule.
    pub fn can_step(&self, from: Point, to: Point) -> bool {
        if !from.is_adjacent(to) {
            return false;
        }
        match (self.map.elevation(from), self.map.elevation(to)) {
            (Some(a), Some(b)) => self.rule.allows(a, b),
            _ => false,
        }
    }
}

impl Pather for HeightPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.can_step(p, n) {
                buf.push(n);
            }
        }
    }

    fn is_step(&self, from: Point, to: Point) -> bool {
        self.can_step(from, to)
    }
}

impl WeightedPather for HeightPather<'_> {
    fn cost(&self, _from: Point, _to: Point) -> u32 {
        1
    }
}
