//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `DomainState` - Fleet data, filters, locale and table settings
//! - `ui` - Presentation state (tabs, layout mode)
//! - `ModalStack` - Modal overlay management
//!
//! Everything below `domain` is pure and free of terminal concerns.

pub mod cache;
pub mod columns;
pub mod domain;
pub mod error;
pub mod filter;
pub mod fleet;
pub mod generator;
pub mod locale;
pub mod metrics;
pub mod modal;
pub mod profile;
pub mod report;
pub mod rng;
pub mod ui;

// Re-export commonly used types
pub use domain::DomainState;
pub use fleet::{Alert, GeneratorModel, GeneratorRecord, Region, Status};
pub use locale::Locale;
pub use profile::{FleetProfile, ProfileKind};
