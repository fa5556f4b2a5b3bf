pub mod app;
pub mod backend;
pub mod config;
pub mod contacts;
pub mod effects;
pub mod error;
pub mod event;
pub mod logging;
pub mod model;
pub mod resolver;
pub mod stories;
pub mod view;
pub mod watcher;
