use super::pair::Pair;
use crate::Arbitrary;
use crate::Payoff;
use crate::Score;
use std::sync::Arc;

/// a player's value for winning, as a function of her own score and
/// the score of the opponent.
///
/// resolved into a variant once at the API boundary: a plain number is
/// the fixed-prize contest, where value depends on neither score and
/// the equilibrium CDF has a closed form. downstream code matches the
/// variant instead of re-detecting number-vs-function at every use.
#[derive(Clone)]
pub enum Value {
    Constant(Payoff),
    Function(Arc<dyn Fn(Score, Score) -> Payoff + Send + Sync>),
}

impl Value {
    /// wrap a closure over (own score, opponent score).
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Score, Score) -> Payoff + Send + Sync + 'static,
    {
        Self::Function(Arc::new(f))
    }
    /// pointwise evaluation.
    pub fn at(&self, own: Score, opp: Score) -> Payoff {
        match self {
            Self::Constant(v) => *v,
            Self::Function(f) => f(own, opp),
        }
    }
    /// value at the origin. seeds the bound heuristic under the
    /// fixed-prize assumption.
    pub fn prize(&self) -> Payoff {
        self.at(0., 0.)
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Constant(1.)
    }
}

impl From<Payoff> for Value {
    fn from(prize: Payoff) -> Self {
        Self::Constant(prize)
    }
}

/// a bare number broadcasts all the way to a symmetric fixed-prize pair.
impl From<Payoff> for Pair<Value> {
    fn from(prize: Payoff) -> Self {
        Self::from(Value::from(prize))
    }
}

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(v) => write!(f, "Value::Constant({})", v),
            Self::Function(_) => write!(f, "Value::Function(..)"),
        }
    }
}

impl Arbitrary for Value {
    fn random() -> Self {
        Self::Constant(1. + rand::random::<Payoff>())
    }
}
