pub mod alternatives;
pub mod benchmarks;
pub mod error;
pub mod helpers;

#[cfg(test)]
mod integration_tests;
