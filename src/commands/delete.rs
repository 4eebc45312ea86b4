use crate::fs::{FileOps, LocalFs};
use crate::output::{emit_output, is_json_mode};
use crate::utils::{get_path, handle_error};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
struct DeleteOutput {
    path: String,
    deleted: bool,
}

pub fn delete(matches: &ArgMatches) {
    let path = get_path(matches);

    let fs = LocalFs::new();

    if is_json_mode() {
        match fs.unlink(&path) {
            Ok(()) => emit_output(&DeleteOutput {
                path,
                deleted: true,
            }),
            Err(e) => handle_error(e.message, Some("delete_failed")),
        }
        return;
    }

    let pb = ProgressBar::new(100);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(ProgressStyle::with_template("{spinner:.green} {msg}").unwrap());

    pb.set_message("Deleting file...");

    if let Err(e) = fs.unlink(&path) {
        pb.finish_and_clear();
        handle_error(e.message, Some("delete_failed"));
    }

    let elapsed = pb.elapsed();

    pb.set_style(ProgressStyle::with_template("{prefix:.green} {msg}").unwrap());
    pb.set_prefix("✓");
    pb.finish_with_message(format!("File deleted ({:.2?})", elapsed));
}
