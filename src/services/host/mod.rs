//! Process and OS-shell glue for the unpacker binary.

pub mod association;
pub mod launch;

pub use association::{association_commands, register_association};
pub use launch::{ensure_host_available, launch_host};

#[cfg(test)]
#[path = "tests/host_tests.rs"]
mod tests;
