//! Deterministic, frame-exact simulation of a classic maze-chase arcade game.

pub mod asset;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod map;
