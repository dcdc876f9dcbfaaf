//! ArgMatches → Command conversion.

use clap::ArgMatches;
use tokenmngr_executor::Command;

/// Translate an operation subcommand into a [`Command`].
///
/// `serve` is not an operation and is handled by the caller.
pub fn matches_to_command(name: &str, matches: &ArgMatches) -> Result<Command, String> {
    let id = || required_str(matches, "id");
    match name {
        "create" => Ok(Command::Create { id: id()? }),
        "write" => Ok(Command::Write {
            id: id()?,
            name: required_str(matches, "name")?,
            low: bound(matches, "low"),
            mid: bound(matches, "mid"),
            high: bound(matches, "high"),
        }),
        "read" => Ok(Command::Read { id: id()? }),
        "drop" => Ok(Command::Drop { id: id()? }),
        "inspect" => Ok(Command::Inspect { id: id()? }),
        "list" => Ok(Command::List),
        "ping" => Ok(Command::Ping),
        other => Err(format!("Unknown operation '{}'", other)),
    }
}

fn required_str(matches: &ArgMatches, arg: &str) -> Result<String, String> {
    matches
        .get_one::<String>(arg)
        .cloned()
        .ok_or_else(|| format!("--{} is required", arg))
}

fn bound(matches: &ArgMatches, arg: &str) -> u64 {
    matches.get_one::<u64>(arg).copied().unwrap_or(0)
}
