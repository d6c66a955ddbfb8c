use crate::Arbitrary;
use crate::Payoff;
use crate::Score;
use std::sync::Arc;

/// a player's cost of effort with respect to her own score.
///
/// monotonically increasing in any sane contest. nothing here enforces
/// that; a non-monotone cost produces a non-monotone candidate CDF and
/// the caller finds out through the validity flags.
#[derive(Clone)]
pub struct Cost(Arc<dyn Fn(Score) -> Payoff + Send + Sync>);

impl Cost {
    /// wrap a closure over the player's own score.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Score) -> Payoff + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }
    /// pointwise evaluation.
    pub fn at(&self, score: Score) -> Payoff {
        (self.0)(score)
    }
}

/// linear cost, the canonical all-pay benchmark.
impl Default for Cost {
    fn default() -> Self {
        Self::from_fn(|s| s)
    }
}

impl std::fmt::Debug for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cost(..)")
    }
}

impl Arbitrary for Cost {
    fn random() -> Self {
        let slope = 0.5 + rand::random::<Payoff>();
        Self::from_fn(move |s| slope * s)
    }
}
