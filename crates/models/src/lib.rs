//! Entity definitions for clients and their contacts.

pub mod errors;
pub mod db;
pub mod client;
pub mod contact;

#[cfg(test)]
mod tests;
