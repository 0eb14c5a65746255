// ============================================================================
// Engine Module
// Public period operations: addition, scaling and timestamp application
// ============================================================================
//
// Each operation widens its operands into the numeric module's working
// representation, computes there, normalises, and narrows back with a
// range check.

mod add;
mod apply;
mod scale;
