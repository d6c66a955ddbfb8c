use super::error::ContestError;
use crate::Score;

/// the truncated score axis: `num` points uniformly spaced from
/// `bound / num` up to `bound`.
///
/// zero is excluded to avoid degeneracy at the origin; the mass of
/// `[0, bound/num]` lands in the first cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    bound: Score,
    num: usize,
}

impl Grid {
    pub fn new(bound: Score, num: usize) -> Result<Self, ContestError> {
        if num == 0 {
            Err(ContestError::InvalidInput(
                "grid resolution must be positive".to_string(),
            ))
        } else if !bound.is_finite() || bound <= 0. {
            Err(ContestError::InvalidInput(format!(
                "support bound must be positive and finite, got {}",
                bound
            )))
        } else {
            Ok(Self { bound, num })
        }
    }
    pub fn bound(&self) -> Score {
        self.bound
    }
    pub fn num(&self) -> usize {
        self.num
    }
    /// cell width.
    pub fn step(&self) -> Score {
        self.bound / self.num as Score
    }
    /// i-th grid point, one cell off the origin.
    pub fn point(&self, i: usize) -> Score {
        (i + 1) as Score * self.step()
    }
    /// center of the i-th cell, the quadrature node for [`super::method::Method::Midpoint`].
    pub fn midpoint(&self, i: usize) -> Score {
        self.point(i) - self.step() / 2.
    }
    /// materialized axis.
    pub fn points(&self) -> Vec<Score> {
        (0..self.num).map(|i| self.point(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_spacing() {
        let grid = Grid::new(2., 100).expect("valid grid");
        assert_eq!(grid.points().len(), 100);
        assert!((grid.step() - 0.02).abs() < 1e-12);
        assert!((grid.point(0) - 0.02).abs() < 1e-12);
        assert!((grid.point(99) - 2.).abs() < 1e-12);
    }

    #[test]
    fn strictly_increasing_and_positive() {
        let grid = Grid::new(1., 64).expect("valid grid");
        let points = grid.points();
        assert!(points[0] > 0.);
        assert!(points.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn midpoints_split_cells() {
        let grid = Grid::new(1., 10).expect("valid grid");
        assert!((grid.midpoint(0) - 0.05).abs() < 1e-12);
        assert!((grid.midpoint(9) - 0.95).abs() < 1e-12);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert!(Grid::new(1., 0).is_err());
        assert!(Grid::new(0., 100).is_err());
        assert!(Grid::new(-1., 100).is_err());
        assert!(Grid::new(Score::INFINITY, 100).is_err());
        assert!(Grid::new(Score::NAN, 100).is_err());
    }
}
