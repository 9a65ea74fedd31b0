pub mod error;
pub mod schema;
pub mod session;
pub mod types;

pub use error::SpellcastError;
pub use schema::{export_document_json, import_document_json, CURRENT_SCHEMA_VERSION};
pub use types::*;
