//! Hunter - Idle Hunter RPG Engine
//!
//! This module exposes the game logic for front ends, the balance simulator
//! and tests.

pub mod character;
pub mod combat;
pub mod core;
pub mod dungeon;
pub mod items;
pub mod quests;
pub mod shop;
pub mod simulator;
pub mod skills;
pub mod training;
pub mod utils;
