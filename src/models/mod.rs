mod contact;
pub mod content;

pub use contact::*;
