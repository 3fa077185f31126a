#![deny(warnings)]

pub mod animation;
pub mod config;
pub mod game;
pub mod matcher;
pub mod pose;
pub mod skeleton;
pub mod speech;
