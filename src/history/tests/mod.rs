//! History module tests
//!
//! - Ordering and deduplication of `add`
//! - `remove` semantics
//! - Filesystem reconciliation in `list`
//! - Persistence round-trips and load failure handling
