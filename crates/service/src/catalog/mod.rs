//! Catalog module: three-layer architecture (domain, repository, service).
//!
//! Categories and products share one generic repository port; the SeaORM
//! adapter lives in [`repo::seaorm`], the in-memory one in [`repository::memory`].

pub mod domain;
pub mod repository;
pub mod repo;
pub mod category_service;
pub mod product_service;

pub use category_service::CategoryService;
pub use product_service::ProductService;
