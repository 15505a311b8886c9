#[cfg(not(any(unix, windows)))]
compile_error!("nw-core requires positional file reads (unix or windows)");

pub mod candidates;
pub mod dataset;
mod engine;
mod error;
pub mod line;
pub mod query;
pub mod search;
pub mod settings;
pub mod source;
#[cfg(test)]
pub(crate) mod testutil;
pub mod tier;

pub use engine::{Suggester, SuggesterConfig};
pub use error::SuggestError;
