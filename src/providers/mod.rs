//! Rate provider implementations.

pub mod yahoo;
