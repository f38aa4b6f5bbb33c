pub mod engine;
pub mod links;
pub mod parser;
pub mod placeholder;
pub mod report;

pub use crate::domain::model::{BasicInfo, LinkSet, ParsedNumber, PlaceholderBag, Report};
pub use crate::domain::ports::{Clock, Storage};
pub use crate::utils::error::Result;
