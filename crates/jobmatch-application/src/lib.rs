//! Application Layer - Jobmatch
//!
//! Implements the search use case on top of the domain ports.
//!
//! ## Components
//!
//! | Component | Module |
//! |-----------|--------|
//! | Feature vector generation | [`domain_services::feature_vector`] |
//! | Predicate construction | [`domain_services::predicate_builder`] |
//! | Ranking plans | [`domain_services::ranking`] |
//! | Row assembly | [`domain_services::result_assembler`] |
//! | Cache policy | [`use_cases::search_cache`] |
//! | Search notifications | [`use_cases::notifier`] |
//! | Search orchestration | [`use_cases::search_service`] |
//! | Provider registries | [`ports::registry`] |
//!
//! ## Dependencies
//!
//! This crate depends only on `jobmatch-domain` and pure libraries. Concrete
//! providers live in `jobmatch-providers` and register themselves into the
//! registries declared here.

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
