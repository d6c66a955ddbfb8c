//! Numerical equilibrium solver for two-player all-pay contests.
//!
//! Players commit to a score at a cost, the higher score takes the
//! prize, and everyone pays. Equilibria are mixed: each player
//! randomizes over scores according to a CDF, possibly with an atom of
//! "drop out" probability at zero. This crate recovers those CDFs by
//! discretizing a Volterra integral equation of the first kind over a
//! truncated score grid, then growing the trial support bound until
//! the discretized density integrates to a proper distribution.

pub mod contest;
pub mod solver;

pub use contest::cost::Cost;
pub use contest::pair::Pair;
pub use contest::value::Value;
pub use solver::distribution::Distribution;
pub use solver::equilibrium::Equilibrium;
pub use solver::error::ContestError;
pub use solver::method::Method;

/// Effort levels along the contest score axis.
pub type Score = f64;
/// Prize values and accumulated costs.
pub type Payoff = f64;
/// CDF values, atoms, and per-cell masses.
pub type Probability = f64;

/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Default grid resolution. More points resolve the density better but
/// each solve is quadratic in this count.
pub const DEFAULT_NUM: usize = 1000;
/// Default upper support bound, and the fallback when the bound
/// heuristic degenerates.
pub const DEFAULT_BOUND: Score = 1.0;
/// Bound-search budget. Doubling 64 times spans ~19 orders of magnitude
/// from any starting guess; a contest that stays invalid past that is
/// misspecified, not under-resolved.
pub const MAX_DOUBLINGS: usize = 64;

/// Solve one player's atomless distribution against an opposing value
/// and cost environment. See [`Distribution::solve`].
pub fn atomless(
    value: impl Into<Value>,
    cost: Cost,
    bound: Score,
    num: usize,
    method: Method,
) -> Result<Distribution, ContestError> {
    Distribution::solve(&value.into(), &cost, bound, num, method)
}

/// Solve the two-player equilibrium. A single value or cost broadcasts
/// to both (symmetric) players; a 2-tuple keeps them distinct. See
/// [`Equilibrium::solve`].
pub fn equilibrium(
    values: impl Into<Pair<Value>>,
    costs: impl Into<Pair<Cost>>,
    bound: Option<Score>,
    num: usize,
) -> Result<Equilibrium, ContestError> {
    Equilibrium::solve(values.into(), costs.into(), bound, num)
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves forward")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
