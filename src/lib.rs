//! Coinlens: exchange scanning, technical indicators and rule-based
//! BUY/SELL/HOLD signals with report output.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod signals;
