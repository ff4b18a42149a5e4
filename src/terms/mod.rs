//! Term supply: the built-in list, pool merging and term sources.
//!
//! Storage and editing of managed terms live outside this crate. The game
//! consumes them through the [`TermSource`] trait and always ends up with
//! a pool of at least 25 entries.

pub mod builtin;
pub mod pool;
pub mod source;

pub use builtin::BUILTIN_TERMS;
pub use pool::{TermPool, TermRecord};
pub use source::{resolve_pool, JsonTermSource, StaticTermSource, TermSource};
