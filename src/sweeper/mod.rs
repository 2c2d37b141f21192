//! Artifact sweeper: discovery walk and ordered removal.

pub mod discovery;
pub mod removal;
