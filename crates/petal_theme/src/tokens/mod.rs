//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the design system:
//! - Colors
//! - Typography (sizes, weights, line heights)
//! - Spacing (4px scale)
//! - Border radii and widths
//! - Shadows (with mobile elevation)
//! - Opacity
//! - Animation durations

mod animation;
mod border;
mod color;
mod opacity;
mod radius;
mod shadow;
mod spacing;
mod typography;

pub use animation::*;
pub use border::*;
pub use color::*;
pub use opacity::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;
