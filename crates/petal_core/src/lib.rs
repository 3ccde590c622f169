//! Petal Core Runtime
//!
//! Foundational primitives shared by every Petal crate:
//!
//! - **Color**: RGBA color value with hex parsing and interpolation
//! - **State Machines**: small flat statecharts for component lifecycles
//! - **Back Handler**: hardware back-button listener registry (LIFO dispatch)
//! - **Build Mode**: development/production switch for debug-only checks
//!
//! # Example
//!
//! ```rust
//! use petal_core::fsm::StateMachine;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Door { Closed, Open }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Action { Push, Pull }
//!
//! let mut fsm = StateMachine::builder(Door::Closed)
//!     .on(Door::Closed, Action::Push, Door::Open)
//!     .on(Door::Open, Action::Pull, Door::Closed)
//!     .build();
//!
//! fsm.send(Action::Push);
//! assert!(fsm.is_in(Door::Open));
//! ```

pub mod back_handler;
pub mod build_mode;
pub mod color;
pub mod fsm;

pub use back_handler::{BackHandler, BackListenerId, BackSubscription};
pub use build_mode::BuildMode;
pub use color::{Color, ColorParseError};
pub use fsm::{StateMachine, StateMachineBuilder, Transition};
