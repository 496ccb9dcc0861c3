//! Closed-form pricing for European options, futures and fixed-vs-floating
//! swaps, with text-input validation and chart curves, plus the HTTP service
//! that fronts it.

pub mod config;
pub mod desk;
pub mod errors;
pub mod forms;
pub mod models;
pub mod server;
pub mod state;
pub mod validation;

pub use desk::{price_future, price_option, value_swap, PricingDesk};
pub use errors::{PricingError, PricingResult};
