//! Side effects outside the terminal
//!
//! - CSV export of the fleet table

pub mod export;
