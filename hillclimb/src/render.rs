//! Drawing a route over a height map.

use hillclimb_core::{HeightMap, Point};

/// Glyph for a cell not on the route.
pub const EMPTY: char = '.';

/// Arrow pointing from `from` toward an adjacent `to`.
fn arrow(from: Point, to: Point) -> Option<char> {
    match (to.x - from.x, to.y - from.y) {
        (0, -1) => Some('^'),
        (1, 0) => Some('>'),
        (0, 1) => Some('v'),
        (-1, 0) => Some('<'),
        _ => None,
    }
}

/// Render `walk` (in travel order) as one line per map row.
///
/// Every cell left by the walk shows the direction of the next step; the
/// final cell keeps its input glyph and all other cells are [`EMPTY`].
pub fn render_route(map: &HeightMap, walk: &[Point]) -> String {
    let w = map.width().max(0) as usize;
    let mut rows: Vec<Vec<char>> = vec![vec![EMPTY; w]; map.height().max(0) as usize];
    let mut put = |p: Point, ch: char| {
        if map.contains(p) {
            rows[p.y as usize][p.x as usize] = ch;
        }
    };

    for pair in walk.windows(2) {
        if let Some(ch) = arrow(pair[0], pair[1]) {
            put(pair[0], ch);
        }
    }
    if let Some(&last) = walk.last() {
        put(last, map.glyph(last).unwrap_or(EMPTY));
    }

    let mut out = String::with_capacity(rows.len() * (w + 1));
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hillclimb_paths::{climb, descent_field, descent_route};

    const SAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi";

    #[test]
    fn renders_climb_from_start() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        let route = climb(&map, map.start()).unwrap();
        let walk: Vec<Point> = route.forward().collect();
        assert_eq!(
            render_route(&map, &walk),
            "\
>>vv<<<<
..vvv<<^
..vv>E^^
..v>>>^^
..>>>>>^
"
        );
    }

    #[test]
    fn renders_descent_route_in_climb_order() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        let field = descent_field(&map).unwrap();
        let route = descent_route(&map, &field, Point::new(0, 4)).unwrap();
        let walk: Vec<Point> = route.forward().collect();
        assert_eq!(
            render_route(&map, &walk),
            "\
...v<<<<
...vv<<^
...v>E^^
.>v>>>^^
>^>>>>>^
"
        );
    }

    #[test]
    fn empty_walk_renders_blank_map() {
        let map = HeightMap::parse("Sb\ncE").unwrap();
        assert_eq!(render_route(&map, &[]), "..\n..\n");
    }

    #[test]
    fn single_point_keeps_its_glyph() {
        let map = HeightMap::parse("Sb\ncE").unwrap();
        assert_eq!(render_route(&map, &[Point::new(1, 0)]), ".b\n..\n");
    }
}
