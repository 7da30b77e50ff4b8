use proptest::prelude::*;
use proptest::sample::Index;

use wavefront_core::{Point, Range};
use wavefront_paths::{AdjacencyIndex, BfsState, Step, depth, path_to, solve};

/// Grids up to 8x8 with roughly 30% walls, as (columns, rows, walls).
fn grids() -> impl Strategy<Value = (i32, i32, Vec<bool>)> {
    (1i32..9, 1i32..9).prop_flat_map(|(w, h)| {
        (
            Just(w),
            Just(h),
            prop::collection::vec(prop::bool::weighted(0.3), (w * h) as usize),
        )
    })
}

fn build(w: i32, h: i32, walls: &[bool]) -> AdjacencyIndex {
    let range = Range::sized(w, h);
    AdjacencyIndex::new(range, |p| !walls[range.index_of(p).unwrap()])
}

/// L1 distance: a lower bound on the BFS depth between two cells.
fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

fn pick(idx: &AdjacencyIndex, i: Index) -> Option<Point> {
    let free: Vec<Point> = idx.free_cells().collect();
    (!free.is_empty()).then(|| free[i.index(free.len())])
}

/// Shortest 4-connected distances from `start` by relaxation to a fixed
/// point; `None` for unreachable cells.
fn reference_distances(idx: &AdjacencyIndex, start: Point) -> Vec<Option<usize>> {
    let range = idx.range();
    let mut dist = vec![None; range.len()];
    dist[range.index_of(start).unwrap()] = Some(0);
    let mut changed = true;
    while changed {
        changed = false;
        for p in idx.free_cells() {
            for &n in idx.neighbors_of(p).unwrap() {
                let (pi, ni) = (range.index_of(p).unwrap(), range.index_of(n).unwrap());
                if let Some(d) = dist[pi] {
                    if dist[ni].is_none_or(|dn| d + 1 < dn) {
                        dist[ni] = Some(d + 1);
                        changed = true;
                    }
                }
            }
        }
    }
    dist
}

proptest! {
    #[test]
    fn exhaustive_run_visits_exactly_the_reachable_cells(
        (w, h, walls) in grids(),
        i in any::<Index>(),
    ) {
        let idx = build(w, h, &walls);
        let Some(start) = pick(&idx, i) else { return Ok(()); };
        let mut state = BfsState::new(&idx, start).unwrap();
        state.run_to_end(&idx);
        let reference = reference_distances(&idx, start);

        for p in idx.range() {
            let expected = reference[idx.range().index_of(p).unwrap()];
            prop_assert_eq!(depth(state.visited(), p), expected, "depth mismatch at {}", p);
            prop_assert_eq!(state.visited().contains(p), expected.is_some());
        }
    }

    #[test]
    fn heads_come_out_in_layer_order(
        (w, h, walls) in grids(),
        i in any::<Index>(),
    ) {
        let idx = build(w, h, &walls);
        let Some(start) = pick(&idx, i) else { return Ok(()); };
        let mut state = BfsState::new(&idx, start).unwrap();
        let mut last = 0;
        while let Step::Expanded { head, .. } = state.step(&idx) {
            let d = depth(state.visited(), head).unwrap();
            prop_assert!(d >= last);
            prop_assert!(d as i32 >= manhattan(start, head));
            last = d;
        }
        prop_assert!(state.is_done());
    }

    #[test]
    fn reversed_paths_are_walks_of_bfs_length(
        (w, h, walls) in grids(),
        i in any::<Index>(),
    ) {
        let idx = build(w, h, &walls);
        let Some(start) = pick(&idx, i) else { return Ok(()); };
        let mut state = BfsState::new(&idx, start).unwrap();
        state.run_to_end(&idx);

        prop_assert_eq!(path_to(state.visited(), start), vec![start]);
        for &c in state.visited().cells() {
            let mut walk = path_to(state.visited(), c);
            walk.reverse();
            prop_assert_eq!(walk.first(), Some(&start));
            prop_assert_eq!(walk.last(), Some(&c));
            prop_assert_eq!(walk.len(), depth(state.visited(), c).unwrap() + 1);
            for pair in walk.windows(2) {
                prop_assert!(idx.neighbors_of(pair[0]).unwrap().contains(&pair[1]));
            }
        }
    }

    #[test]
    fn solve_is_deterministic_and_shortest(
        (w, h, walls) in grids(),
        i in any::<Index>(),
        j in any::<Index>(),
    ) {
        let idx = build(w, h, &walls);
        let (Some(start), Some(goal)) = (pick(&idx, i), pick(&idx, j)) else { return Ok(()); };
        let a = solve(&idx, start, goal).unwrap();
        let b = solve(&idx, start, goal).unwrap();
        prop_assert_eq!(a.visited(), b.visited());
        prop_assert_eq!(a.path(), b.path());

        let reference = reference_distances(&idx, start)[idx.range().index_of(goal).unwrap()];
        prop_assert_eq!(a.reached(), reference.is_some());
        match reference {
            Some(d) => prop_assert_eq!(a.path().len(), d + 1),
            None => prop_assert!(a.path().is_empty()),
        }
    }
}
