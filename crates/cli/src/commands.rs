//! Clap command tree definition.

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("tokenmngr")
        .about("In-memory token store: run the service or issue one operation against it")
        .subcommand_required(true)
        .arg(
            Arg::new("host")
                .long("host")
                .help("Server address (default: localhost)")
                .global(true),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .help("Server port (default: 50051)")
                .value_parser(value_parser!(u16))
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw")
                .global(true),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (bare values, no labels)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_serve())
        .subcommand(
            Command::new("create")
                .about("Create an empty token")
                .arg(id_arg()),
        )
        .subcommand(build_write())
        .subcommand(
            Command::new("read")
                .about("Reconcile a token's upper range and print its final value")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("drop")
                .about("Remove a token")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show every field of a token")
                .arg(id_arg()),
        )
        .subcommand(Command::new("list").about("List live token ids"))
        .subcommand(Command::new("ping").about("Check that the service is up"))
}

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .required(true)
        .value_name("ID")
        .help("Token id")
}

fn bound_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_parser(value_parser!(u64))
        .default_value("0")
        .help(help)
}

fn build_write() -> Command {
    Command::new("write")
        .about("Set a token's name and domain; prints the partial value")
        .arg(id_arg())
        .arg(
            Arg::new("name")
                .long("name")
                .default_value("")
                .value_name("NAME")
                .help("Hash key material"),
        )
        .arg(bound_arg("low", "Lower bound"))
        .arg(bound_arg("mid", "Midpoint"))
        .arg(bound_arg("high", "Upper bound"))
}

fn build_serve() -> Command {
    Command::new("serve")
        .about("Run the token service")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Config file (default: ./tokenmngr.toml if present)"),
        )
}
