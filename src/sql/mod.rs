//! Safe SQL builder: identifiers are fixed, values as parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
