//! Safe SQL builder: identifiers from resource constants only, values as parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
