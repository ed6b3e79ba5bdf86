#![doc = include_str!("../README.md")]

pub mod error;
pub mod heuristic;
pub mod neighbors;
pub mod board;
pub mod stats;
pub mod solver;
