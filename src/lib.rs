pub mod app;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod fsm;
pub mod scene;
pub mod states;
pub mod systems;
