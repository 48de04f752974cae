//! Game implementations.

pub mod mancala;
