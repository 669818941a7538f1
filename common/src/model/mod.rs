//! Entities stored in the hosted database, the forms that create them, and
//! the small pieces of client state that sit next to them.

pub mod archive;
pub mod book;
mod de;
pub mod insight;
pub mod journey;
pub mod settings;

pub(crate) use de::null_as_empty;
