//! Built-in themes

mod petal;

pub use petal::{palette, PetalTheme};
