mod derived;
mod match_totals;

pub use derived::{derive, population_std_dev};
pub use match_totals::fold;
