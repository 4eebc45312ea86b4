use clap::{Command, arg};

use crate::utils::handle_error;

mod commands;
mod fs;
mod output;
mod utils;

fn cli() -> Command {
    Command::new("fops")
        .about("A minimal file access shim: read, write, and delete files with structured errors.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            arg!(--mode <MODE> "The output mode ('interactive' or 'json')")
                .required(false)
                .global(true)
                .value_parser(["interactive", "json"]),
        )
        .subcommand(
            Command::new("read")
                .about("Print the full content of a file")
                .arg(arg!(-p --path <PATH> "The path of the file to read").required(false)),
        )
        .subcommand(
            Command::new("write")
                .about("Overwrite (or create) a file with the given content")
                .arg(arg!(-p --path <PATH> "The path of the file to write").required(false))
                .arg(arg!(-c --content <CONTENT> "The content to write").required(false)),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a file")
                .arg(arg!(-p --path <PATH> "The path of the file to delete").required(false)),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    output::set_output_mode(output::detect_mode_from_args(&args));
    output::init_panic_hook_if_json();

    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("read", matches)) => commands::read(matches),
        Some(("write", matches)) => commands::write(matches),
        Some(("delete", matches)) => commands::delete(matches),
        _ => {
            handle_error(
                "Invalid command! Run 'fops --help' for more information.".to_string(),
                None,
            );
        }
    }
}
