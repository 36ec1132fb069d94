// Public API - what other modules can use
pub use collector::{summarize, TOP_TEAMMATES};
pub use models::{
    DamageBreakdown, KdaTotals, LegendaryMonsters, Multikills, PingTotals, SeasonSummary,
    SummaryDetails, SummaryPlayer, Teammate, WinLoss,
};

// Internal modules
mod collector;
pub mod models;
