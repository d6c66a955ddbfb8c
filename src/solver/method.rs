use super::error::ContestError;
use super::grid::Grid;
use crate::contest::cost::Cost;
use crate::contest::value::Value;
use crate::Probability;
use crate::Score;

/// numeric backend for the causal kernel solve.
///
/// the equilibrium density solves a Volterra equation of the first
/// kind: the running integral of value-weighted density must equal the
/// cost at every score. a player's density at score t only enters the
/// integral at scores s >= t, so the discretized kernel is lower
/// triangular and forward substitution solves it exactly for the
/// chosen quadrature. the two variants differ only in where along each
/// cell they evaluate the kernel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    /// kernel on the grid points themselves. exact for this
    /// discretization of the running integral.
    Substitution,
    /// kernel at cell midpoints, half a step behind each grid point.
    #[default]
    Midpoint,
}

impl Method {
    /// quadrature node for column j.
    fn node(&self, grid: &Grid, j: usize) -> Score {
        match self {
            Self::Substitution => grid.point(j),
            Self::Midpoint => grid.midpoint(j),
        }
    }

    /// per-cell probability masses m, solved by forward substitution
    /// from sum_{j<=i} v(s_i, t_j) m_j = c(s_i).
    pub fn masses(
        &self,
        value: &Value,
        cost: &Cost,
        grid: &Grid,
    ) -> Result<Vec<Probability>, ContestError> {
        let mut masses = Vec::<Probability>::with_capacity(grid.num());
        for i in 0..grid.num() {
            let s = grid.point(i);
            let pivot = value.at(s, self.node(grid, i));
            if !pivot.is_finite() || pivot == 0. {
                return Err(ContestError::SingularSystem { index: i, score: s });
            }
            let run = masses
                .iter()
                .enumerate()
                .map(|(j, m)| value.at(s, self.node(grid, j)) * m)
                .sum::<Probability>();
            masses.push((cost.at(s) - run) / pivot);
        }
        Ok(masses)
    }
}
