//! Sequence utilities: deduplication, range filtering, sorting, grouping.
//!
//! Every function here operates on in-memory sequences and is independently
//! testable. Nothing shares state with anything else.

mod dedup;
mod order;
mod range;
mod records;

pub use dedup::unique;
pub use order::copy_sorted;
pub use order::shuffle;
pub use order::sort_descending;
pub use order::sort_then_reverse;
pub use range::filter_range;
pub use range::filter_range_in_place;
pub use records::average_by;
pub use records::group_by_key;
pub use records::sort_by_key;
