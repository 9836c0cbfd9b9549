//! Query results and their text/JSON presentation.

use std::io::{self, Write};

use hillclimb_core::{HeightMap, Point};
use hillclimb_paths::{
    Route, RouteError, StartCandidate, best_start, climb, descent_field, descent_route,
    lowest_start, rank_lowest,
};
use serde::Serialize;

use crate::cli::StartSelector;

/// The answer to one query, as printed or serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum Answer {
    /// No start argument: climb from the start marker, and from the best
    /// lowest point.
    Summary {
        from_start: Option<u32>,
        from_lowest: Option<StartCandidate>,
    },
    /// Climb from a given cell.
    From { from: Point, steps: Option<u32> },
    /// Every lowest point and the best of them.
    AllLowest {
        candidates: Vec<StartCandidate>,
        best: Option<StartCandidate>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub width: i32,
    pub height: i32,
    pub start: Point,
    pub end: Point,
    #[serde(flatten)]
    pub answer: Answer,
    /// The route behind the answer, in travel order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Vec<Point>>,
}

/// Turn "no route" into `None`, keeping real failures.
fn reachable(result: Result<Route, RouteError>) -> Result<Option<Route>, RouteError> {
    match result {
        Ok(route) => Ok(Some(route)),
        Err(e) if e.is_unreachable() => Ok(None),
        Err(e) => Err(e),
    }
}

fn steps_of(route: &Option<Route>) -> Option<u32> {
    route.as_ref().map(|r| r.steps() as u32)
}

impl Report {
    /// Run the query selected by `start` over `map`. With `with_route`, the
    /// route behind the answer is kept for drawing.
    pub fn build(
        map: &HeightMap,
        start: Option<StartSelector>,
        with_route: bool,
    ) -> Result<Self, RouteError> {
        let (answer, route) = match start {
            None => {
                let route = reachable(climb(map, map.start()))?;
                let answer = Answer::Summary {
                    from_start: steps_of(&route),
                    from_lowest: lowest_start(map)?,
                };
                (answer, route)
            }
            Some(StartSelector::At(from)) => {
                let route = reachable(climb(map, from))?;
                let answer = Answer::From {
                    from,
                    steps: steps_of(&route),
                };
                (answer, route)
            }
            Some(StartSelector::AllLowest) => {
                let field = descent_field(map)?;
                let candidates = rank_lowest(map, &field);
                let best = best_start(&candidates);
                let route = match best {
                    Some(b) => Some(descent_route(map, &field, b.pos)?),
                    None => None,
                };
                (Answer::AllLowest { candidates, best }, route)
            }
        };

        log::info!("answer: {answer:?}");

        Ok(Self {
            width: map.width(),
            height: map.height(),
            start: map.start(),
            end: map.end(),
            answer,
            route: route
                .filter(|_| with_route)
                .map(|r| r.forward().collect()),
        })
    }

    /// Write the human-readable answer lines.
    pub fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        match &self.answer {
            Answer::Summary {
                from_start,
                from_lowest,
            } => {
                writeln!(out, "Fewest steps from S to E: {}", Steps(*from_start))?;
                writeln!(
                    out,
                    "Fewest steps from any lowest point: {}",
                    Best(*from_lowest)
                )?;
            }
            Answer::From { from, steps } => {
                writeln!(out, "Fewest steps from {from} to E: {}", Steps(*steps))?;
            }
            Answer::AllLowest { candidates, best } => {
                for c in candidates {
                    writeln!(out, "{}: {}", c.pos, Steps(c.steps))?;
                }
                writeln!(out, "Fewest steps from any lowest point: {}", Best(*best))?;
            }
        }
        Ok(())
    }
}

/// A step count, or `unreachable`.
struct Steps(Option<u32>);

impl std::fmt::Display for Steps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{n}"),
            None => write!(f, "unreachable"),
        }
    }
}

/// The best candidate with where it starts, or `unreachable`.
struct Best(Option<StartCandidate>);

impl std::fmt::Display for Best {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(StartCandidate {
                pos,
                steps: Some(n),
            }) => write!(f, "{n} (from {pos})"),
            _ => write!(f, "unreachable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi";

    const ENCLOSED: &str = "\
Sabc
abzz
azEz
abzz";

    fn text(report: &Report) -> String {
        let mut buf = Vec::new();
        report.write_text(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn summary_text() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        let report = Report::build(&map, None, false).unwrap();
        assert_eq!(
            text(&report),
            "Fewest steps from S to E: 31\nFewest steps from any lowest point: 29 (from 0,4)\n"
        );
        assert_eq!(report.route, None);
    }

    #[test]
    fn from_point_text() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        let from = StartSelector::At(Point::new(0, 4));
        let report = Report::build(&map, Some(from), true).unwrap();
        assert_eq!(text(&report), "Fewest steps from 0,4 to E: 29\n");
        let route = report.route.unwrap();
        assert_eq!(route.len(), 30);
        assert_eq!(route.first(), Some(&Point::new(0, 4)));
        assert_eq!(route.last(), Some(&map.end()));
    }

    #[test]
    fn all_lowest_text() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        let all = Some(StartSelector::AllLowest);
        let report = Report::build(&map, all, true).unwrap();
        assert_eq!(
            text(&report),
            "\
0,0: 31
1,0: 30
0,1: 30
0,2: 31
0,3: 30
0,4: 29
Fewest steps from any lowest point: 29 (from 0,4)
"
        );
        assert_eq!(report.route.map(|r| r.len()), Some(30));
    }

    #[test]
    fn unreachable_is_reported_not_fatal() {
        let map = HeightMap::parse(ENCLOSED).unwrap();
        let report = Report::build(&map, None, true).unwrap();
        assert_eq!(
            text(&report),
            "\
Fewest steps from S to E: unreachable
Fewest steps from any lowest point: unreachable
"
        );
        assert_eq!(report.route, None);
    }

    #[test]
    fn all_lowest_text_when_end_is_enclosed() {
        let map = HeightMap::parse(ENCLOSED).unwrap();
        let all = Some(StartSelector::AllLowest);
        let report = Report::build(&map, all, true).unwrap();
        assert_eq!(
            text(&report),
            "\
0,0: unreachable
1,0: unreachable
0,1: unreachable
0,2: unreachable
0,3: unreachable
Fewest steps from any lowest point: unreachable
"
        );
        assert_eq!(report.route, None);
    }

    #[test]
    fn start_outside_map_is_fatal() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        let from = StartSelector::At(Point::new(8, 0));
        let err = Report::build(&map, Some(from), false).unwrap_err();
        assert!(!err.is_unreachable());
    }

    #[test]
    fn json_shape() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        let from = StartSelector::At(Point::new(0, 4));
        let report = Report::build(&map, Some(from), false).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["query"], "from");
        assert_eq!(value["steps"], 29);
        assert_eq!(value["from"]["x"], 0);
        assert_eq!(value["end"]["y"], 2);
        assert!(value.get("route").is_none());
    }

    #[test]
    fn json_summary_with_unreachable() {
        let map = HeightMap::parse(ENCLOSED).unwrap();
        let report = Report::build(&map, None, false).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["query"], "summary");
        assert!(value["from_start"].is_null());
        assert!(value["from_lowest"].is_null());
    }
}
