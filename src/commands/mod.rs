pub mod package_cmds;
pub mod unpack_cmds;

#[cfg(test)]
#[path = "tests/cmds_tests.rs"]
mod tests;
