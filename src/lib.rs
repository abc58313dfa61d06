//! Library converting Ragnarok Online client item tables to typed item records.
//!
//! [`read::ItemReader`] does the actual work on in-memory text; [`functions`] holds the table parsers and file helpers around it.

pub mod constants;
pub mod core;
pub mod functions;
pub mod params;
pub mod read;
pub mod types;

pub use functions::{load_description, load_tables, read_text, to_json, write_json};
pub use params::Params;
pub use read::ItemReader;
pub use types::{Category, Error, Output, Record, SourceFiles, Tables};
