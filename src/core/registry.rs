use crate::adapters::display::{ConsoleDisplay, ReverseDisplay};
use crate::adapters::print::{ConsolePrint, ReversePrint};
use crate::adapters::serialization::{JsonSerialization, XmlSerialization};
use crate::core::{Action, DisplayMethod, PrintMethod, SerializationMethod};
use crate::utils::error::{BookError, Result};
use std::collections::HashMap;
use std::sync::LazyLock;

static GLOBAL_REGISTRY: LazyLock<StrategyRegistry> = LazyLock::new(StrategyRegistry::new);

/// Fixed lookup tables from variant key to strategy, one table per action.
/// Immutable once built.
pub struct StrategyRegistry {
    display: HashMap<&'static str, Box<dyn DisplayMethod>>,
    print: HashMap<&'static str, Box<dyn PrintMethod>>,
    serialization: HashMap<&'static str, Box<dyn SerializationMethod>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        let mut display_methods: HashMap<&'static str, Box<dyn DisplayMethod>> = HashMap::new();
        display_methods.insert("console", Box::new(ConsoleDisplay));
        display_methods.insert("reverse", Box::new(ReverseDisplay));

        let mut print_methods: HashMap<&'static str, Box<dyn PrintMethod>> = HashMap::new();
        print_methods.insert("console", Box::new(ConsolePrint));
        print_methods.insert("reverse", Box::new(ReversePrint));

        let mut serialization_methods: HashMap<&'static str, Box<dyn SerializationMethod>> =
            HashMap::new();
        serialization_methods.insert("json", Box::new(JsonSerialization));
        serialization_methods.insert("xml", Box::new(XmlSerialization));

        let display_count = display_methods.len();
        let print_count = print_methods.len();
        let serialization_count = serialization_methods.len();
        tracing::debug!(
            display_count,
            print_count,
            serialization_count,
            "Strategy registry built"
        );

        Self {
            display: display_methods,
            print: print_methods,
            serialization: serialization_methods,
        }
    }

    /// Process-wide registry, built on first use.
    pub fn global() -> &'static StrategyRegistry {
        &GLOBAL_REGISTRY
    }

    pub fn display(&self, key: &str) -> Result<&dyn DisplayMethod> {
        self.display
            .get(key)
            .map(|method| method.as_ref())
            .ok_or_else(|| unknown(Action::Display, key))
    }

    pub fn print(&self, key: &str) -> Result<&dyn PrintMethod> {
        self.print
            .get(key)
            .map(|method| method.as_ref())
            .ok_or_else(|| unknown(Action::Print, key))
    }

    pub fn serialization(&self, key: &str) -> Result<&dyn SerializationMethod> {
        self.serialization
            .get(key)
            .map(|method| method.as_ref())
            .ok_or_else(|| unknown(Action::Serialize, key))
    }

    /// Known variant keys for `action`, sorted.
    pub fn methods(&self, action: Action) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = match action {
            Action::Display => self.display.keys().copied().collect(),
            Action::Print => self.print.keys().copied().collect(),
            Action::Serialize => self.serialization.keys().copied().collect(),
        };
        keys.sort_unstable();
        keys
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn unknown(action: Action, key: &str) -> BookError {
    BookError::UnknownVariant {
        action,
        variant: key.to_string(),
    }
}
