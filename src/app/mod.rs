pub mod action;
pub mod command;
pub mod commands;
pub mod config;
pub mod features;
pub mod input;
pub mod keymap;
pub mod logging;
pub mod r#loop;
pub mod menu;
pub mod reducer;
pub mod shared;
pub mod state;
pub mod ui;
