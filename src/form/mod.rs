pub mod definition;
pub mod value;

pub use definition::*;
pub use value::*;
