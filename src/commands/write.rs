use crate::fs::{FileOps, LocalFs};
use crate::output::{emit_output, is_json_mode};
use crate::utils::{get_path, handle_error};
use clap::ArgMatches;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
struct WriteOutput {
    path: String,
    bytes: usize,
}

pub fn write(matches: &ArgMatches) {
    let path = get_path(matches);

    let content = matches.get_one::<String>("content").map_or_else(
        || {
            let typed_content: String = Input::<String>::new()
                .with_prompt("Enter the content to write")
                .allow_empty(true)
                .interact_text()
                .unwrap_or_else(|e| handle_error(format!("{}", e), None));

            typed_content
        },
        |content| content.to_string(),
    );

    let fs = LocalFs::new();

    if is_json_mode() {
        match fs.write_file_content(&path, &content) {
            Ok(()) => emit_output(&WriteOutput {
                bytes: content.len(),
                path,
            }),
            Err(e) => handle_error(e.message, Some("write_failed")),
        }
        return;
    }

    let pb = ProgressBar::new(100);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(ProgressStyle::with_template("{spinner:.green} {msg}").unwrap());

    pb.set_message("Writing file...");

    if let Err(e) = fs.write_file_content(&path, &content) {
        pb.finish_and_clear();
        handle_error(e.message, Some("write_failed"));
    }

    let elapsed = pb.elapsed();

    pb.set_style(ProgressStyle::with_template("{prefix:.green} {msg}").unwrap());
    pb.set_prefix("✓");
    pb.finish_with_message(format!("File written ({:.2?})", elapsed));
}
