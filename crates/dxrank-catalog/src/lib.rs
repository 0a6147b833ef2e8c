//! # dxrank-catalog
//!
//! Reference runtime for the DXRANK engine:
//!
//! - [`loader::TomlCatalog`] — validated TOML catalog loading behind the
//!   `CatalogProvider` trait.
//! - [`data::bundled_catalog`] — an embedded fictional 20-disease catalog
//!   used by demos and tests. No external systems are contacted.
//! - [`parser::KeywordAnswerParser`] — a rules-only reference
//!   implementation of the `AnswerParser` contract, standing in for the
//!   LLM front-end of a production deployment.
//! - [`scenarios`] — scripted end-to-end interviews exercising
//!   score → update → re-rank.

pub mod data;
pub mod loader;
pub mod parser;
pub mod scenarios;

pub use data::bundled_catalog;
pub use loader::TomlCatalog;
pub use parser::KeywordAnswerParser;
