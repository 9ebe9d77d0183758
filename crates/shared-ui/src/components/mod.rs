pub mod button;
pub mod card;
pub mod form;
pub mod input;
pub mod label;
pub mod textarea;

// Re-exports for convenience
pub use button::*;
pub use card::*;
pub use form::*;
pub use input::*;
pub use label::*;
pub use textarea::*;
