pub mod features;
pub mod labels;
pub mod request;

pub use features::*;
pub use labels::*;
pub use request::*;
