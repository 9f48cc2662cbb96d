//! # Catalog
//!
//! The component catalog data model and the sources it is loaded from.
//!
//! ```text
//! Catalog
//! └── category key → CategoryRecord
//!     ├── title
//!     └── components: [ComponentRecord]
//!         ├── id, name, description (bilingual)
//!         ├── props: [PropertyRecord]
//!         └── code_example
//! ```
//!
//! A catalog is built once per session and never mutated afterwards.

pub mod source;
pub mod sources;
pub mod types;

pub use source::{CatalogError, CatalogSource};
pub use sources::{FileCatalogSource, HttpCatalogSource};
pub use types::{
    Bilingual, Catalog, CatalogPayload, CategoryRecord, ComponentRecord, NO_DEFAULT,
    PropertyRecord,
};
