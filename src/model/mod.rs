//! Pure data structures (DTOs) shared by the principle modules.

pub mod account;
pub mod product;

pub use account::*;
pub use product::*;
