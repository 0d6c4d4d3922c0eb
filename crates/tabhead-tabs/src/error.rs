//! Tab error types

use thiserror::Error;

use crate::tab::TabId;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    NotFound(TabId),

    #[error("Cannot remove the last tab")]
    LastTab,

    #[error("Tab collection is empty")]
    Empty,

    #[error("Duplicate tab id: {0}")]
    DuplicateId(TabId),

    #[error("Tab ids exhausted")]
    IdExhausted,
}
