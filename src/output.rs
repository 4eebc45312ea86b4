use serde::Serialize;
use std::sync::OnceLock;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Interactive,
    Json,
}

static OUTPUT_MODE: OnceLock<OutputMode> = OnceLock::new();

pub fn detect_mode_from_args(args: &[String]) -> OutputMode {
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--mode" {
            if let Some(value) = iter.next() {
                return match value.to_ascii_lowercase().as_str() {
                    "json" => OutputMode::Json,
                    "interactive" => OutputMode::Interactive,
                    _ => OutputMode::Json,
                };
            }
            return OutputMode::Json;
        } else if let Some(value) = arg.strip_prefix("--mode=") {
            return match value.to_ascii_lowercase().as_str() {
                "json" => OutputMode::Json,
                "interactive" => OutputMode::Interactive,
                _ => OutputMode::Json,
            };
        }
    }

    OutputMode::Interactive
}

pub fn set_output_mode(mode: OutputMode) {
    let _ = OUTPUT_MODE.set(mode);
}

pub fn output_mode() -> OutputMode {
    *OUTPUT_MODE.get_or_init(|| OutputMode::Interactive)
}

pub fn is_json_mode() -> bool {
    output_mode() == OutputMode::Json
}

#[derive(Serialize)]
struct Event<'a, T: Serialize> {
    #[serde(rename = "type")]
    kind: &'a str,
    data: T,
}

#[derive(Serialize)]
struct ErrorData<'a> {
    message: &'a str,
    code: &'a str,
}

#[derive(Serialize)]
struct ErrorDataOwned {
    message: String,
    code: String,
}

#[derive(Serialize)]
struct PanicData {
    message: String,
    code: &'static str,
    location: Option<String>,
}

fn emit_event<T: Serialize>(kind: &'static str, data: &T, to_stderr: bool) {
    let event = Event { kind, data };
    let json = serde_json::to_string(&event).unwrap_or_else(|e| {
        let fallback = Event {
            kind: "error",
            data: ErrorDataOwned {
                message: e.to_string(),
                code: "serialization_error".to_string(),
            },
        };
        serde_json::to_string(&fallback)
            .unwrap_or_else(|_| "{\"type\":\"error\",\"data\":{\"message\":\"serialization_error\",\"code\":\"serialization_error\"}}".to_string())
    });

    if to_stderr {
        eprintln!("{json}");
    } else {
        println!("{json}");
    }
}

pub fn emit_output<T: Serialize>(data: &T) {
    emit_event("output", data, false);
}

pub fn emit_error(message: &str, code: &str) -> ! {
    let payload = ErrorData { message, code };
    emit_event("error", &payload, true);
    std::process::exit(1);
}

pub fn init_panic_hook_if_json() {
    if !is_json_mode() {
        return;
    }

    std::panic::set_hook(Box::new(|info| {
        let message = if let Some(value) = info.payload().downcast_ref::<&str>() {
            value.to_string()
        } else if let Some(value) = info.payload().downcast_ref::<String>() {
            value.clone()
        } else {
            "panic".to_string()
        };

        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()));

        let payload = PanicData {
            message,
            code: "panic",
            location,
        };

        emit_event("error", &payload, true);
    }));
}
