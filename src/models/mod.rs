// Data models (structs)
pub mod catalog;
pub mod customization;
pub mod settings;

pub use catalog::*;
pub use customization::*;
pub use settings::*;
