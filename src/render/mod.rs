pub mod colors;
pub mod context;
pub mod elements;
pub mod errors;
pub mod registry;
pub mod tag;
pub mod warnings;

pub use colors::*;
pub use context::*;
pub use elements::*;
pub use errors::*;
pub use registry::*;
pub use tag::*;
pub use warnings::*;
