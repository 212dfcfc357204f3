// Skill gap analysis engine.
// Pure functions over skill lists; the only shared data is the read-only
// PriorityTable and CareerCatalog held in AppState.

pub mod analyzer;
pub mod careers;
pub mod handlers;
pub mod normalize;
pub mod priority;
pub mod readiness;
