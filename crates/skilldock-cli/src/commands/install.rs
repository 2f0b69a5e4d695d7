//! `skilldock install-cmd` command implementation.
//!
//! Prints the shell command a user would run to install a skill. Nothing
//! is executed; the registry never runs installers on the user's behalf.

use std::str::FromStr;

use skilldock_core::{skill_install_command, ClientKind, PackageManager};

/// Execute the `skilldock install-cmd` command
pub fn execute(
    identifier: String,
    client: String,
    local: bool,
    package_manager: String,
) -> anyhow::Result<()> {
    let client = ClientKind::from_str(&client).map_err(anyhow::Error::msg)?;
    let package_manager =
        PackageManager::from_str(&package_manager).map_err(anyhow::Error::msg)?;

    println!(
        "{}",
        skill_install_command(&identifier, client, local, package_manager)
    );

    Ok(())
}
