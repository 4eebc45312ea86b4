use crate::output::{emit_error, is_json_mode};
use clap::ArgMatches;
use console::style;
use dialoguer::Input;

pub fn get_path(matches: &ArgMatches) -> String {
    matches.get_one::<String>("path").map_or_else(
        || {
            let typed_path: String = Input::<String>::new()
                .with_prompt("Enter the file path")
                .interact_text()
                .unwrap_or_else(|e| handle_error(format!("{}", e), None));

            typed_path
        },
        |path| path.to_string(),
    )
}

pub fn handle_error(message: String, code: Option<&str>) -> ! {
    if is_json_mode() {
        emit_error(&message, code.unwrap_or("error"));
    }

    eprintln!("{} {}", style("Error:").red().bold(), message);
    std::process::exit(1);
}
