//! Listing Store Implementations
//!
//! | Store | Description |
//! |-------|-------------|
//! | [`InMemoryListingStore`] | Concurrent map, optionally seeded from JSON |
//! | `PostgresListingStore` | r2d2 pool over a relational table with pgvector |
//!
//! Both evaluate the same [`PredicateSet`](jobmatch_domain::value_objects::PredicateSet)
//! for counting and paging, so a page never contains a listing the count
//! would exclude.

#[cfg(feature = "listing-memory")]
pub mod in_memory;
#[cfg(feature = "listing-postgres")]
pub mod postgres;
pub mod sql;

#[cfg(feature = "listing-memory")]
pub use in_memory::InMemoryListingStore;
#[cfg(feature = "listing-postgres")]
pub use postgres::{PostgresListingStore, PostgresStoreConfig};
pub use sql::{SearchStatements, SqlParam, SqlStatement, render_search};
