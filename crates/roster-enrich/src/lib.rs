//! Outbound demographic lookups for roster.
//!
//! [`ApiEnricher`] implements [`roster_core::enrich::Enricher`] over three
//! public lookup services keyed by first name: agify.io (age), genderize.io
//! (gender) and nationalize.io (nationality guess). The lookups run in a
//! fixed order and the first failure aborts the whole enrichment.

mod client;

pub mod error;

pub use client::{ApiEnricher, EnrichConfig};
pub use error::{Error, Lookup, Result};

#[cfg(test)]
mod tests;
