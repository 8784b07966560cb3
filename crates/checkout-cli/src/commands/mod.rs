// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers and keeps parsing and coordination to itself.

pub mod checkout;
pub mod segments;
