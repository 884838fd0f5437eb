// originality/src/commands/mod.rs
pub mod score;
