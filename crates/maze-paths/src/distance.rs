use maze_core::Coord;

/// Manhattan (L1) distance between two cells.
///
/// This is the exact step count between `a` and `b` on an obstacle-free
/// 4-connected grid, so it never overestimates and changes by at most one
/// per step.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_and_zero_on_self() {
        let a = Coord::new(0, 0);
        let b = Coord::new(4, 4);
        assert_eq!(manhattan(a, b), 8);
        assert_eq!(manhattan(b, a), 8);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn consistent_across_one_step() {
        let goal = Coord::new(3, 7);
        let c = Coord::new(5, 2);
        for n in c.neighbors_4() {
            assert!(manhattan(c, goal) <= 1 + manhattan(n, goal));
        }
    }
}
