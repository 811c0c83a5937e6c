// chfmt-cli/src/commands/mod.rs
//
// Command implementations for the chfmt CLI.

pub mod convert;
