pub mod agents;
pub mod score;
pub mod snapshot;
