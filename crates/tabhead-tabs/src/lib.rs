//! Tabhead Tab Model
//!
//! The ordered tab collection behind the header widget. Tabs keep insertion
//! order, ids are never reused, and the collection never becomes empty.

mod error;
mod key;
mod list;
mod partition;
mod tab;

pub use error::TabError;
pub use key::EditKey;
pub use list::{TabList, TitleEdit};
pub use partition::{Partition, OVERFLOW_THRESHOLD};
pub use tab::{Tab, TabId};

pub type Result<T> = std::result::Result<T, TabError>;
