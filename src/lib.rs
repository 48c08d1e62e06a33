pub mod board;
pub mod config;
pub mod consts;
pub mod error;
pub mod game;
pub mod history;
pub mod ledger;
pub mod planner;
pub mod stats;
pub mod tendency;
// cmd and reports live in the binary crate (main.rs).
