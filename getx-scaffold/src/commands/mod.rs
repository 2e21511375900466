//! CLI command implementations

pub mod config;
pub mod page;

pub use config::ConfigCommand;
pub use page::PageCommand;

/// Start a jailed test from an empty environment with its home inside the jail
#[cfg(test)]
pub fn isolate(jail: &mut figment::Jail) {
    jail.clear_env();
    let home = jail.directory().to_path_buf();
    jail.set_env("HOME", home.display());
    jail.set_env("XDG_CONFIG_HOME", home.join(".config").display());
}
