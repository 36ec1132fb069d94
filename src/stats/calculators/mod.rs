mod aggression;
mod consistency;
mod farming;
mod teamplay;
mod versatility;
mod vision;

pub use aggression::AggressionCalculator;
pub use consistency::ConsistencyCalculator;
pub use farming::FarmingCalculator;
pub use teamplay::TeamplayCalculator;
pub use versatility::VersatilityCalculator;
pub use vision::VisionCalculator;
