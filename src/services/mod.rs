//! Game services
//!
//! This module contains the interactive controller: menu selection,
//! the per-round turn loop and the replay loop.

pub mod game;
pub mod round;
pub mod setup;
