use crate::utils::error::Result;
use std::io::Write;

// Strategies are stateless and shared through the process-wide registry,
// hence Send + Sync.

pub trait DisplayMethod: Send + Sync {
    fn display(&self, out: &mut dyn Write, content: &str) -> Result<()>;
}

pub trait PrintMethod: Send + Sync {
    fn print(&self, out: &mut dyn Write, title: &str, content: &str) -> Result<()>;
}

pub trait SerializationMethod: Send + Sync {
    fn serialize(&self, title: &str, content: &str) -> Result<String>;
}
