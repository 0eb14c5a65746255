// ============================================================================
// Interfaces Module
// Capabilities the engine requires from its environment
// ============================================================================

mod timestamp;

pub use timestamp::Timestamp;
