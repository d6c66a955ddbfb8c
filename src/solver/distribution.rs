use super::error::ContestError;
use super::grid::Grid;
use super::method::Method;
use crate::contest::cost::Cost;
use crate::contest::value::Value;
use crate::Payoff;
use crate::Probability;
use crate::Score;
use serde::Serialize;

/// one player's candidate atomless distribution over the truncated
/// score grid.
///
/// `pdf` is scaled so that `pdf[i] / num` is the probability mass of
/// the i-th cell; `cdf` is the plain running sum of those masses.
/// `truncation` marks the last grid point where the running sum is
/// still a CDF (`<= 1`); everything past it is numerically invalid and
/// gets discarded by the orchestrator. `valid` reports whether the
/// running sum ever passed certainty, i.e. whether the bound was large
/// enough to hold the whole support.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    grid: Vec<Score>,
    pdf: Vec<Probability>,
    cdf: Vec<Probability>,
    truncation: usize,
    valid: bool,
}

impl Distribution {
    /// solve one player's atomless distribution against an opposing
    /// value and cost environment.
    pub fn solve(
        value: &Value,
        cost: &Cost,
        bound: Score,
        num: usize,
        method: Method,
    ) -> Result<Self, ContestError> {
        let grid = Grid::new(bound, num)?;
        match value {
            Value::Constant(prize) => Self::degenerate(*prize, cost, grid),
            Value::Function(_) => Self::general(value, cost, grid, method),
        }
    }

    /// the fixed-prize contest: value depends on neither score, the
    /// equilibrium CDF is the cost-to-prize ratio at every point, and
    /// nothing needs solving. masses are recovered as first
    /// differences, with the first cell carrying the mass of
    /// `[0, grid[0]]`.
    fn degenerate(prize: Payoff, cost: &Cost, grid: Grid) -> Result<Self, ContestError> {
        if !prize.is_finite() || prize == 0. {
            return Err(ContestError::SingularSystem {
                index: 0,
                score: grid.point(0),
            });
        }
        let cdf = (0..grid.num())
            .map(|i| cost.at(grid.point(i)) / prize)
            .collect::<Vec<_>>();
        let mut masses = Vec::with_capacity(grid.num());
        let mut last = 0.;
        for &g in cdf.iter() {
            masses.push(g - last);
            last = g;
        }
        Ok(Self::assemble(grid, masses, cdf))
    }

    /// the general contest: delegate to a causal kernel backend and
    /// accumulate its cell masses into the CDF.
    fn general(
        value: &Value,
        cost: &Cost,
        grid: Grid,
        method: Method,
    ) -> Result<Self, ContestError> {
        let masses = method.masses(value, cost, &grid)?;
        let cdf = masses
            .iter()
            .scan(0., |run, m| {
                *run += m;
                Some(*run)
            })
            .collect();
        Ok(Self::assemble(grid, masses, cdf))
    }

    /// one canonical scaling everywhere: the solver's native unknown
    /// is the per-cell mass, the CDF is its running sum, and the
    /// reported density is mass-per-cell times resolution.
    fn assemble(grid: Grid, masses: Vec<Probability>, cdf: Vec<Probability>) -> Self {
        let pdf = masses
            .iter()
            .map(|m| m * grid.num() as Probability)
            .collect();
        let truncation = cdf.iter().rposition(|&g| g <= 1.).unwrap_or(0);
        let valid = cdf.last().copied().unwrap_or(0.) > 1.;
        Self {
            grid: grid.points(),
            pdf,
            cdf,
            truncation,
            valid,
        }
    }

    pub fn grid(&self) -> &[Score] {
        &self.grid
    }
    pub fn pdf(&self) -> &[Probability] {
        &self.pdf
    }
    pub fn cdf(&self) -> &[Probability] {
        &self.cdf
    }
    /// index of the last grid point where the running sum is `<= 1`.
    pub fn truncation(&self) -> usize {
        self.truncation
    }
    /// score at the truncation index.
    pub fn truncation_score(&self) -> Score {
        self.grid[self.truncation]
    }
    /// whether the bound was large enough for the running sum to pass
    /// certainty somewhere on the grid. when false the true support
    /// extends past the bound and the caller must grow it.
    pub fn valid(&self) -> bool {
        self.valid
    }
}

/// sketch a CDF as a block chart, clipped to [0, 1].
pub(crate) fn sketch(
    f: &mut std::fmt::Formatter<'_>,
    cdf: &[Probability],
) -> std::fmt::Result {
    let n_x_bins = 48;
    let n_y_bins = 8;
    for y in (1..=n_y_bins).rev() {
        for x in 0..n_x_bins {
            let i = x * cdf.len() / n_x_bins;
            let height = cdf[i].clamp(0., 1.);
            let rung = y as Probability / n_y_bins as Probability;
            if height >= rung {
                write!(f, "█")?;
            } else if height >= rung - 0.50 / n_y_bins as Probability {
                write!(f, "▄")?;
            } else if height >= rung - 0.75 / n_y_bins as Probability {
                write!(f, "▂")?;
            } else {
                write!(f, " ")?;
            }
        }
        writeln!(f)?;
    }
    for _ in 0..n_x_bins {
        write!(f, "-")?;
    }
    writeln!(f)
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        sketch(f, &self.cdf)?;
        writeln!(
            f,
            "truncation {:.4} @ {}  valid {}",
            self.truncation_score(),
            self.truncation,
            self.valid,
        )
    }
}
