use gridtrace_core::Pos;

/// Manhattan (L1) distance between two positions.
///
/// Admissible and consistent as an A* heuristic on unit-cost 4-connected
/// grids, which is what guarantees the returned paths are optimal.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Pos::new(0, 0), Pos::new(4, 4)), 8);
        assert_eq!(manhattan(Pos::new(2, 5), Pos::new(2, 5)), 0);
        assert_eq!(manhattan(Pos::new(3, 1), Pos::new(0, 2)), 4);
        // Symmetric.
        assert_eq!(
            manhattan(Pos::new(1, 7), Pos::new(4, 2)),
            manhattan(Pos::new(4, 2), Pos::new(1, 7))
        );
    }
}
