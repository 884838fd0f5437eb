// originality/src/lib.rs
//! # Originality Score CLI
//!
//! This crate provides the `originality-score` command: it reads text files,
//! scores them with `originality-core` and prints the result.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
