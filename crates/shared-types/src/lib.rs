pub mod contact;
pub mod error;
pub mod feature_flags;
pub mod status;

pub use contact::*;
pub use error::*;
pub use feature_flags::*;
pub use status::*;
