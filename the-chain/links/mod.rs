//! Concrete link types, each paired with the enumerator that drives it.
//!
//! Streaming links (mapped, filtered, concatenated, sliced, zipped,
//! uniquely, flattened) pull at most one upstream item per step.
//! Aggregating links (grouped, counted) drain upstream when their enumerator
//! is created. Reordering links (reversed, sorted) drain upstream on first
//! access through [`indexed::IndexedEnumerator`].

pub mod concatenated;
pub mod filtered;
pub mod flattened;
pub mod grouped;
pub mod indexed;
pub mod mapped;
pub mod reordered;
pub mod sliced;
pub mod uniquely;
pub mod zipped;
