pub mod dispatcher;
pub mod registry;

pub use crate::domain::model::{Action, Book, Command};
pub use crate::domain::ports::{DisplayMethod, PrintMethod, SerializationMethod};
pub use crate::utils::error::Result;
