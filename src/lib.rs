#![allow(nonstandard_style)]

mod error_handling;
mod evaluating;
mod parsing;
mod scanning;

pub use error_handling::*;
pub use evaluating::*;
pub use parsing::*;
pub use scanning::*;
