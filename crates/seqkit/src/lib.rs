//! # seqkit
//!
//! Composable, lazy sequence-transformation combinators - THE LOGIC.
//!
//! Every operator consumes one or more input sequences (anything
//! `IntoIterator`) and lazily produces a derived sequence, a scalar, or a
//! grouping.
//!
//! ## Operator Families
//!
//! - `normalization`: absent <-> empty sequence conversions
//! - `cardinality`: exactly-one / at-least-N checks without full materialization
//! - `traversal`: eager `for_each*` and lazy `tap*` side effects
//! - `combinators`: strict `zip*`/`merge*` and lenient `interlace`
//! - `generation`: circular replay, fixed-stride subsampling
//! - `concat`: append/prepend
//! - `batching`: fixed-size chunks with a partial tail
//! - `sampling`: sampling without replacement through a `Randomizer`
//! - `extremum`: first-wins min/max, reorder by key sequence
//! - `join`: delimiter-joined rendering
//!
//! ## Architectural Constraints
//!
//! - Single-threaded and synchronous; laziness is the only suspension point
//! - Adapters own their input cursors and drop them as soon as they finish
//! - No operator mutates caller-owned data
//! - Errors are returned, never panicked

// =============================================================================
// MODULES
// =============================================================================

pub mod batching;
pub mod cardinality;
pub mod combinators;
pub mod concat;
pub mod config;
pub mod ext;
pub mod extremum;
pub mod generation;
pub mod guard;
pub mod join;
pub mod normalization;
pub mod sampling;
pub mod traversal;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{Position, Result, SeqError};

// =============================================================================
// RE-EXPORTS: Operators
// =============================================================================

pub use batching::{Batches, in_batches_of};
pub use cardinality::{has_at_least, has_exactly_one};
pub use combinators::{
    Interlace, Merge2, Merge3, Zip2, Zip3, Zip4, ZipWith, interlace, merge2, merge3, zip_with,
    zip2, zip3, zip4,
};
pub use concat::{append, prepend};
pub use extremum::{
    Comparer, NaturalOrder, SortBy, max_by, max_by_with, min_by, min_by_with, sort_by,
    sort_by_with,
};
pub use generation::{Circular, Stepped, to_circular, to_stepped};
pub use guard::{require_argument, require_present};
pub use join::{join_with, join_with_by};
pub use normalization::{
    EmptyIfAbsent, SkipAbsent, absent_if_empty, empty_if_absent, skip_absent_elements,
};
pub use sampling::{Randomizer, Shuffle, StdRandomizer, shuffle, shuffle_with};
pub use traversal::{
    Tap, TapIndexed, for_each, for_each_indexed, for_each_indexed_filtered, tap, tap_indexed,
    tap_indexed_filtered,
};

// =============================================================================
// RE-EXPORTS: Configuration & Extensions
// =============================================================================

pub use config::SamplingConfig;
pub use ext::{AbsentExt, SequenceExt, SkipAbsentExt};
