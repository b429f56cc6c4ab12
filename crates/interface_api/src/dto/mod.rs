//! Data transfer objects

pub mod links;
