//! Service layer for the pharmacy catalog.
//! - Domain records and the repository port live in [`catalog`].
//! - Business rules (existence checks, reference and name validation) sit in
//!   the category and product services, independent of the web framework.

pub mod errors;
pub mod catalog;
#[cfg(test)]
pub mod test_support;
