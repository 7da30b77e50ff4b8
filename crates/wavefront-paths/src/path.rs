//! Walking parent pointers back to the root of a traversal.

use wavefront_core::Point;

use crate::visited::Visited;

/// The path from `target` back to the root of `visited`, target first.
///
/// Returns an empty vector when `target` has not been discovered, which is
/// the normal answer for a goal that is unreachable or not reached yet.
pub fn path_to(visited: &Visited, target: Point) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = Some(target);
    while let Some(p) = cur {
        let Some(parent) = visited.parent(p) else {
            break;
        };
        path.push(p);
        cur = parent;
    }
    path
}

/// Number of edges between `target` and the root, or `None` if `target`
/// has not been discovered.
pub fn depth(visited: &Visited, target: Point) -> Option<usize> {
    let mut d = 0;
    let mut cur = visited.parent(target)?;
    while let Some(p) = cur {
        d += 1;
        cur = visited.parent(p).flatten();
    }
    Some(d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavefront_core::Range;

    fn chain() -> Visited {
        // (0,0) <- (1,0) <- (1,1)
        let mut v = Visited::new(Range::sized(2, 2));
        v.insert_root(Point::new(0, 0));
        v.insert(Point::new(1, 0), Point::new(0, 0));
        v.insert(Point::new(1, 1), Point::new(1, 0));
        v
    }

    #[test]
    fn path_runs_target_to_root() {
        let v = chain();
        assert_eq!(
            path_to(&v, Point::new(1, 1)),
            vec![Point::new(1, 1), Point::new(1, 0), Point::new(0, 0)]
        );
        assert_eq!(depth(&v, Point::new(1, 1)), Some(2));
    }

    #[test]
    fn root_path_is_single_cell() {
        let v = chain();
        assert_eq!(path_to(&v, Point::new(0, 0)), vec![Point::new(0, 0)]);
        assert_eq!(depth(&v, Point::new(0, 0)), Some(0));
    }

    #[test]
    fn undiscovered_target_gives_empty_path() {
        let v = chain();
        assert!(path_to(&v, Point::new(0, 1)).is_empty());
        assert!(path_to(&v, Point::new(7, 7)).is_empty());
        assert_eq!(depth(&v, Point::new(0, 1)), None);
    }
}
