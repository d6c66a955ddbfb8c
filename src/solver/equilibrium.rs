use super::distribution::Distribution;
use super::error::ContestError;
use super::method::Method;
use crate::contest::cost::Cost;
use crate::contest::pair::Pair;
use crate::contest::value::Value;
use crate::Probability;
use crate::Score;
use serde::Serialize;

/// the reconciled two-player equilibrium.
///
/// both players' strategies live on a common grid truncated at
/// whichever player's candidate distribution saturates first. each CDF
/// is shifted to end at exactly 1, with the leftover mass recorded as
/// an atom at score zero: the equilibrium probability of dropping out
/// with zero effort.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equilibrium {
    grid: Vec<Score>,
    pdf: Pair<Vec<Probability>>,
    cdf: Pair<Vec<Probability>>,
    atom: Pair<Probability>,
    cutoff: usize,
    bound: Score,
}

impl Equilibrium {
    /// search for a support bound under which at least one player's
    /// candidate distribution is a proper CDF, then reconcile both
    /// players onto the common truncated grid.
    ///
    /// doubling is the right bracketing move here: no finite upper
    /// bound is known a priori, and doubling reaches any valid bound
    /// in logarithmically many solves. the budget turns a misspecified
    /// contest into a typed error instead of an infinite loop.
    pub fn solve(
        values: Pair<Value>,
        costs: Pair<Cost>,
        bound: Option<Score>,
        num: usize,
    ) -> Result<Self, ContestError> {
        if num == 0 {
            return Err(ContestError::InvalidInput(
                "grid resolution must be positive".to_string(),
            ));
        }
        let mut bound = match bound {
            Some(b) => b,
            None => Self::heuristic(&values, &costs, num),
        };
        for _ in 0..crate::MAX_DOUBLINGS {
            // each player's density solves the integral equation driven
            // by the opponent's value and cost, so the roles cross.
            let (one, two) = rayon::join(
                || Distribution::solve(values.two(), costs.two(), bound, num, Method::default()),
                || Distribution::solve(values.one(), costs.one(), bound, num, Method::default()),
            );
            let (one, two) = (one?, two?);
            if one.valid() || two.valid() {
                return Ok(Self::from((one, two, bound)));
            }
            log::info!("{:<32}{:<16}", "bound too small, doubling", bound);
            bound *= 2.;
        }
        Err(ContestError::NonConvergence {
            doublings: crate::MAX_DOUBLINGS,
        })
    }

    /// starting bound under a fixed prize and linear cost: the score
    /// at which a player's cost would exhaust the prize, probed one
    /// grid step from the origin. the smaller guess across players is
    /// the conservative one.
    fn heuristic(values: &Pair<Value>, costs: &Pair<Cost>, num: usize) -> Score {
        let probe = 1. / num as Score;
        let guess = |v: &Value, c: &Cost| v.prize() / (c.at(probe) * num as Score);
        let bound = guess(values.one(), costs.one()).min(guess(values.two(), costs.two()));
        if bound.is_finite() && bound > 0. {
            bound
        } else {
            log::warn!("{:<32}{:<16}", "degenerate bound guess, using", crate::DEFAULT_BOUND);
            crate::DEFAULT_BOUND
        }
    }

    /// the truncated common grid.
    pub fn grid(&self) -> &[Score] {
        &self.grid
    }
    /// both players' scaled densities on the truncated grid.
    pub fn pdf(&self) -> &Pair<Vec<Probability>> {
        &self.pdf
    }
    /// both players' atom-adjusted CDFs, each ending at exactly 1.
    pub fn cdf(&self) -> &Pair<Vec<Probability>> {
        &self.cdf
    }
    /// both players' point masses at score zero.
    pub fn atom(&self) -> &Pair<Probability> {
        &self.atom
    }
    /// index of the common support cutoff.
    pub fn cutoff(&self) -> usize {
        self.cutoff
    }
    /// score at the common support cutoff.
    pub fn cutoff_score(&self) -> Score {
        self.grid[self.cutoff]
    }
    /// the bound the search converged under.
    pub fn bound(&self) -> Score {
        self.bound
    }
}

/// reconciliation of two truncated candidate distributions: cut both
/// at whichever saturates first, then shift each CDF up so it
/// terminates at 1, which places the missing mass as the atom at zero
/// without bending the atomless part.
impl From<(Distribution, Distribution, Score)> for Equilibrium {
    fn from((one, two, bound): (Distribution, Distribution, Score)) -> Self {
        let cutoff = one.truncation().min(two.truncation());
        let grid = one.grid()[..=cutoff].to_vec();
        let pair: Pair<Distribution> = Pair::from((one, two));
        let pdf = pair.map(|d| d.pdf()[..=cutoff].to_vec());
        let atom = pair.map(|d| 1. - d.cdf()[cutoff]);
        let cdf = pair.map(|d| {
            let shift = 1. - d.cdf()[cutoff];
            d.cdf()[..=cutoff].iter().map(|g| g + shift).collect()
        });
        Self {
            grid,
            pdf,
            cdf,
            atom,
            cutoff,
            bound,
        }
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Equilibrium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Bound: {:.4}  Cutoff: {:.4} @ {}", self.bound, self.cutoff_score(), self.cutoff)?;
        writeln!(f, "┌────────┬──────────┬──────────┬──────────┐")?;
        writeln!(f, "│ Player │     Atom │ CDF(min) │ CDF(max) │")?;
        writeln!(f, "├────────┼──────────┼──────────┼──────────┤")?;
        for (player, (atom, cdf)) in [
            (1, (self.atom.one(), self.cdf.one())),
            (2, (self.atom.two(), self.cdf.two())),
        ] {
            writeln!(
                f,
                "│ {:>6} │ {:>8.4} │ {:>8.4} │ {:>8.4} │",
                player,
                atom,
                cdf.first().copied().unwrap_or(0.),
                cdf.last().copied().unwrap_or(0.),
            )?;
        }
        writeln!(f, "└────────┴──────────┴──────────┴──────────┘")?;
        for (player, cdf) in [(1, self.cdf.one()), (2, self.cdf.two())] {
            writeln!(f, "G{}:", player)?;
            super::distribution::sketch(f, cdf)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: Probability = 1e-9;

    #[test]
    fn doubles_past_unit_bound() {
        // v = 1, c(s) = s: at bound 1 the running sum tops out at
        // exactly 1 and never exceeds it, so neither player is valid
        // and the search must advance to bound 2.
        let eq = Equilibrium::solve(
            Pair::from(Value::from(1.)),
            Pair::from(Cost::default()),
            Some(1.),
            1000,
        )
        .expect("equilibrium");
        assert_eq!(eq.bound(), 2.);
        assert_eq!(eq.cutoff(), 499);
        assert!((eq.cutoff_score() - 1.).abs() < TOLERANCE);
        assert!((eq.cdf().one().last().copied().unwrap() - 1.).abs() < TOLERANCE);
    }

    #[test]
    fn symmetric_players_share_strategy() {
        let eq = Equilibrium::solve(
            Pair::from(Value::from(1.5)),
            Pair::from(Cost::from_fn(|s| s * s)),
            Some(2.),
            500,
        )
        .expect("equilibrium");
        assert_eq!(eq.pdf().one(), eq.pdf().two());
        assert_eq!(eq.cdf().one(), eq.cdf().two());
        assert_eq!(eq.atom().one(), eq.atom().two());
    }

    #[test]
    fn steeper_cost_earns_the_atom() {
        // identical unit prizes, but player two pays twice the cost.
        // player one's CDF (driven by the opponent's steeper cost)
        // hits certainty at half the score and caps the common
        // support; the half of player two's mass that no longer fits
        // lands on her atom at zero.
        let eq = Equilibrium::solve(
            Pair::from(Value::from(1.)),
            Pair::from((Cost::default(), Cost::from_fn(|s| 2. * s))),
            None,
            100,
        )
        .expect("equilibrium");
        assert!((eq.cutoff_score() - 0.5).abs() < TOLERANCE);
        assert!(eq.cutoff_score() > 0.);
        assert!(eq.cutoff_score() < eq.bound());
        assert!((eq.atom().one() - 0.).abs() < TOLERANCE);
        assert!((eq.atom().two() - 0.5).abs() < TOLERANCE);
        assert!((eq.cdf().one().last().copied().unwrap() - 1.).abs() < TOLERANCE);
        assert!((eq.cdf().two().last().copied().unwrap() - 1.).abs() < TOLERANCE);
    }

    #[test]
    fn quadratic_versus_linear_costs() {
        let eq = Equilibrium::solve(
            Pair::from(Value::from(1.)),
            Pair::from((Cost::from_fn(|s| s * s), Cost::default())),
            None,
            1000,
        )
        .expect("equilibrium");
        assert!(eq.cutoff_score() > 0.);
        assert!(eq.cutoff_score() < eq.bound());
        assert!(*eq.atom().one() >= 0.);
        assert!(*eq.atom().two() >= 0.);
        assert!((eq.cdf().one().last().copied().unwrap() - 1.).abs() < TOLERANCE);
        assert!((eq.cdf().two().last().copied().unwrap() - 1.).abs() < TOLERANCE);
    }

    #[test]
    fn idempotent_across_calls() {
        let solve = || {
            Equilibrium::solve(
                Pair::from(Value::from(2.)),
                Pair::from((Cost::from_fn(|s| s * s), Cost::default())),
                None,
                200,
            )
            .expect("equilibrium")
        };
        assert_eq!(solve(), solve());
    }

    #[test]
    fn general_value_functions_converge() {
        let value = Value::from_fn(|si, sj| 2. - (si + sj) / 4.);
        let eq = Equilibrium::solve(
            Pair::from(value),
            Pair::from(Cost::default()),
            Some(0.25),
            256,
        )
        .expect("equilibrium");
        assert!(eq.bound() >= 0.25);
        assert!(*eq.atom().one() >= -TOLERANCE);
        assert!(*eq.atom().two() >= -TOLERANCE);
        assert!((eq.cdf().one().last().copied().unwrap() - 1.).abs() < TOLERANCE);
    }

    #[test]
    fn zero_cost_never_converges() {
        let result = Equilibrium::solve(
            Pair::from(Value::from(1.)),
            Pair::from(Cost::from_fn(|_| 0.)),
            None,
            32,
        );
        assert!(matches!(
            result,
            Err(ContestError::NonConvergence { .. })
        ));
    }

    #[test]
    fn rejects_zero_resolution() {
        let result = Equilibrium::solve(
            Pair::from(Value::from(1.)),
            Pair::from(Cost::default()),
            None,
            0,
        );
        assert!(matches!(result, Err(ContestError::InvalidInput(_))));
    }

    #[test]
    fn sketches_without_panic() {
        let eq = Equilibrium::solve(
            Pair::from(Value::from(1.)),
            Pair::from((Cost::default(), Cost::from_fn(|s| 2. * s))),
            None,
            100,
        )
        .expect("equilibrium");
        println!("{}", eq);
    }
}
