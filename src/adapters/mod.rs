// Adapters layer: concrete strategy implementations for the domain ports.

pub mod display;
pub mod print;
pub mod serialization;

pub(crate) fn reverse_chars(text: &str) -> String {
    text.chars().rev().collect()
}
