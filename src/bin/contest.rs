//! Contest Binary
//!
//! Solve a showcase two-player all-pay contest and sketch both
//! equilibrium CDFs, or emit them as JSON.
//!
//! Options: --num, --bound, --json

use allpay::*;
use clap::Parser;

#[derive(Parser)]
#[command(about = "equilibrium strategies for a two-player all-pay contest")]
struct Args {
    /// number of estimation points on the score grid
    #[arg(long, default_value_t = DEFAULT_NUM)]
    num: usize,
    /// starting guess for the upper support bound (heuristic if absent)
    #[arg(long)]
    bound: Option<Score>,
    /// emit the equilibrium as JSON instead of sketching it
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log();
    // a shared prize that decays smoothly once combined effort crosses
    // a threshold, contested by a quadratic-cost player against a
    // linear-cost player
    let value = Value::from_fn(|si, sj| {
        9. / 10. + f64::exp(-30. * (si + sj)) / (f64::exp(-40.) + f64::exp(-30. * (si + sj)))
    });
    let one = Cost::from_fn(|s| s * s);
    let two = Cost::default();
    let eq = equilibrium((value.clone(), value), (one, two), args.bound, args.num)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&eq)?);
    } else {
        println!("{}", eq);
    }
    Ok(())
}
