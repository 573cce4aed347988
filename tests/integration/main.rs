mod common;
mod config;
mod engine;
mod host;
