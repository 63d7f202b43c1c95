mod feature;
mod id;
mod properties;

pub use feature::*;
pub use id::*;
pub use properties::*;
