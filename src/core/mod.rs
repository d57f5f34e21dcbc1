//! Core configuration building blocks: typed fit settings, the
//! `Process`/`Processor` model, per-type parameter schemas, and the
//! deterministic process builder. These are the library's primary API
//! surface, consumed by the CLI binary.
pub mod builder;
pub mod params;
pub mod process;
pub mod schema;
