//! Switch state and train routing over the city tree.

pub mod switches;
pub mod route;
