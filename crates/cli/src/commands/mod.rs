//! Subcommand implementations.

pub mod admin;
pub mod cart;
pub mod shop;
pub mod track;
