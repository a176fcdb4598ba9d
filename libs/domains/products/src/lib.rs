//! Products Domain
//!
//! CRUD and filtering for the product catalog.
//!
//! ```text
//! handlers  ← axum routes + OpenAPI
//!    │
//! service   ← validation, not-found mapping
//!    │
//! repository ← trait; PostgreSQL (SeaORM) and in-memory impls
//!    │
//! models / entity
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{InMemoryProductRepository, ProductService, handlers};
//!
//! let service = ProductService::new(InMemoryProductRepository::new());
//! let router = axum::Router::new().nest("/products", handlers::router(service));
//! # let _: axum::Router = router;
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use models::{Category, Product, ProductFilter, ProductInput, ProductQuery};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
