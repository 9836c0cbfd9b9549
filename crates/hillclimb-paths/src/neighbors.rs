use hillclimb_core::Point;

/// Reusable buffer for filtered cardinal neighbours.
///
/// Route reconstruction asks for the neighbours of every cell on the walk
/// back; one `Neighbors` serves the whole walk without reallocating.
#[derive(Debug, Default)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Neighbours of `p` in the order up, right, down, left, keeping those
    /// for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        self.buf
            .extend(p.neighbors_4().into_iter().filter(|&n| keep(n)));
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hillclimb_core::Range;

    #[test]
    fn cardinal_filters_and_orders() {
        let rng = Range::new(0, 0, 3, 3);
        let mut nb = Neighbors::new();
        assert_eq!(
            nb.cardinal(Point::new(1, 1), |p| rng.contains(p)),
            &[
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 1),
            ]
        );
        assert_eq!(
            nb.cardinal(Point::new(0, 0), |p| rng.contains(p)),
            &[Point::new(1, 0), Point::new(0, 1)]
        );
    }

    #[test]
    fn buffer_is_reused() {
        let mut nb = Neighbors::default();
        assert!(nb.cardinal(Point::new(5, 5), |_| false).is_empty());
        assert_eq!(nb.cardinal(Point::new(5, 5), |p| p.y == 4).len(), 1);
    }
}
