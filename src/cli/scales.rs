use crate::classifier::{LOW_MAX, MEDIUM_MAX};
use crate::types::{Impact, Likelihood};
use anyhow::Result;

pub fn run() -> Result<()> {
    println!("Likelihood:");
    for likelihood in Likelihood::ALL {
        println!("  {} - {}", likelihood.score(), likelihood.label());
    }

    println!("Impact:");
    for impact in Impact::ALL {
        println!("  {} - {}", impact.score(), impact.label());
    }

    println!("Risk levels (likelihood x impact):");
    println!("  1-{}    Low", LOW_MAX);
    println!("  {}-{}   Medium", LOW_MAX + 1, MEDIUM_MAX);
    println!("  {}-25  High", MEDIUM_MAX + 1);
    Ok(())
}
