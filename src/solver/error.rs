use crate::Score;

/// everything that can go wrong while solving a contest.
///
/// a bound too small to hold a proper CDF is deliberately not here:
/// the orchestrator recovers from that by doubling, and only reports
/// [`ContestError::NonConvergence`] once the doubling budget is spent.
#[derive(Debug, thiserror::Error)]
pub enum ContestError {
    /// malformed numeric inputs, reported immediately and never retried.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// the discretized kernel lost its pivot: the value function
    /// vanishes (or is not finite) somewhere on the grid.
    #[error("singular system at grid index {index} (score {score}): value function has no finite nonzero pivot")]
    SingularSystem { index: usize, score: Score },
    /// no finite bound produced a valid distribution within the
    /// doubling budget; the value/cost pair is likely misspecified.
    #[error("no valid distribution after {doublings} bound doublings; check the value and cost functions")]
    NonConvergence { doublings: usize },
}
