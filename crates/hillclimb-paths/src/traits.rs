//! The seam between a map and the searches run over it.

use hillclimb_core::Point;

/// Enumerates the legal single steps out of a cell.
pub trait Pather {
    /// Append every point reachable in one step from `p` into `buf`. The
    /// caller clears `buf` first.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether `from -> to` is one legal step.
    ///
    /// The default asks [`neighbors`](Self::neighbors); implementors with a
    /// direct test should override it.
    fn is_step(&self, from: Point, to: Point) -> bool {
        let mut buf = Vec::with_capacity(4);
        self.neighbors(from, &mut buf);
        buf.contains(&to)
    }
}

/// A [`Pather`] whose steps carry a cost.
pub trait WeightedPather: Pather {
    /// Cost of the step `from -> to`. Must be positive.
    fn cost(&self, from: Point, to: Point) -> u32;
}
