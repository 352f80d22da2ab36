//! SeaORM entities for the catalog tables plus connection helpers.

pub mod errors;
pub mod db;
pub mod categoria;
pub mod produto;

#[cfg(test)]
mod tests;
