//! Domain errors for the few fallible parses in the model layer

use thiserror::Error;

/// Errors raised while parsing user or config supplied names
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FleetError {
    #[error("unknown table column '{0}'")]
    UnknownColumn(String),

    #[error("unknown locale '{0}' (expected 'en' or 'ar')")]
    UnknownLocale(String),

    #[error("unknown fleet profile '{0}' (expected 'standard' or 'extended')")]
    UnknownProfile(String),

    #[error("column selection is empty")]
    EmptySelection,
}
