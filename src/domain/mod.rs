//! Domain - Records Exchanged with the Social API

pub mod config;
pub mod registration;
pub mod relationship;
pub mod user;
