//! Domain entities

mod type_frequency;

pub use type_frequency::{TypeCount, TypeFrequency};
