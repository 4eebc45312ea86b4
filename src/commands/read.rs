use crate::fs::{FileOps, LocalFs};
use crate::output::{emit_output, is_json_mode};
use crate::utils::{get_path, handle_error};
use clap::ArgMatches;
use serde::Serialize;

#[derive(Serialize)]
struct ReadOutput {
    path: String,
    content: String,
}

pub fn read(matches: &ArgMatches) {
    let path = get_path(matches);

    let fs = LocalFs::new();

    let content = match fs.read_file_content(&path) {
        Ok(content) => content,
        Err(e) => handle_error(e.message, Some("read_failed")),
    };

    if is_json_mode() {
        emit_output(&ReadOutput { path, content });
        return;
    }

    print!("{}", content);
}
