//! qalpaq - Karakalpak script detection, transliteration, and
//! spell-check response recovery

use std::io::Read;
use std::process::ExitCode;
use std::str::FromStr;

use qalpaq::config::{load_config, save_config};
use qalpaq::sanitize;
use qalpaq::script::detect;
use qalpaq::spell::{fill_positions, summary};
use qalpaq::translit::Transliterator;
use qalpaq::ScriptType;

fn main() -> ExitCode {
    // logging init (error/warn only by default)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("detect") => run_detect(&args[1..]),
        Some("convert") => run_convert(&args[1..]),
        Some("parse") => run_parse(&args[1..]),
        Some("config") => run_config(&args[1..]),
        _ => {
            usage();
            ExitCode::from(2)
        }
    }
}

fn run_detect(args: &[String]) -> ExitCode {
    let text = match input_text(args) {
        Ok(text) => text,
        Err(e) => {
            log::error!("failed to read input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", detect(&text));
    ExitCode::SUCCESS
}

fn run_convert(args: &[String]) -> ExitCode {
    let mut target: Option<ScriptType> = None;
    let mut json = false;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--to" => match iter.next().map(|name| ScriptType::from_str(name)) {
                Some(Ok(script)) => target = Some(script),
                Some(Err(e)) => {
                    eprintln!("{}", e);
                    return ExitCode::from(2);
                }
                None => {
                    usage();
                    return ExitCode::from(2);
                }
            },
            "--json" => json = true,
            _ => positional.push(arg.clone()),
        }
    }

    let text = match input_text(&positional) {
        Ok(text) => text,
        Err(e) => {
            log::error!("failed to read input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = load_config();
    let engine = Transliterator::new(config.mixed_target);

    let conversion = match target {
        Some(script) => match engine.convert(&text, script) {
            Ok(conversion) => conversion,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::from(2);
            }
        },
        None => engine.convert_auto(&text),
    };

    if json {
        print_json(&conversion)
    } else {
        println!("{}", conversion.converted);
        ExitCode::SUCCESS
    }
}

fn run_parse(args: &[String]) -> ExitCode {
    let mut original: Option<String> = None;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--text" => match iter.next() {
                Some(text) => original = Some(text.clone()),
                None => {
                    usage();
                    return ExitCode::from(2);
                }
            },
            _ => positional.push(arg.clone()),
        }
    }

    let raw = match input_text(&positional) {
        Ok(raw) => raw,
        Err(e) => {
            log::error!("failed to read input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = load_config();
    let mut response = sanitize::parse_with_limit(&raw, config.raw_response_limit);
    if let Some(text) = original {
        fill_positions(&text, &mut response.results);
    }

    let (total, flagged) = summary(&response.results);
    log::info!("{} results, {} flagged", total, flagged);

    print_json(&response)
}

fn run_config(args: &[String]) -> ExitCode {
    let mut config = load_config();
    let mut changed = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--mixed-target" => match iter.next().map(|name| ScriptType::from_str(name)) {
                Some(Ok(script @ (ScriptType::Cyrillic | ScriptType::Latin))) => {
                    config.mixed_target = script;
                    changed = true;
                }
                Some(Ok(other)) => {
                    eprintln!("mixed target must be cyrillic or latin, got {}", other);
                    return ExitCode::from(2);
                }
                Some(Err(e)) => {
                    eprintln!("{}", e);
                    return ExitCode::from(2);
                }
                None => {
                    usage();
                    return ExitCode::from(2);
                }
            },
            "--raw-limit" => match iter.next().map(|value| value.parse::<usize>()) {
                Some(Ok(limit)) => {
                    config.raw_response_limit = limit;
                    changed = true;
                }
                Some(Err(e)) => {
                    eprintln!("invalid limit: {}", e);
                    return ExitCode::from(2);
                }
                None => {
                    usage();
                    return ExitCode::from(2);
                }
            },
            _ => {
                usage();
                return ExitCode::from(2);
            }
        }
    }

    if changed {
        if let Err(e) = save_config(&config) {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    print_json(&config)
}

/// Joined positional args, or stdin when none were given.
fn input_text(args: &[String]) -> Result<String, std::io::Error> {
    if args.is_empty() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer.trim_end().to_string())
    } else {
        Ok(args.join(" "))
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(out) => {
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("failed to serialize output: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn usage() {
    eprintln!("usage: qalpaq <command> [options] [text]");
    eprintln!();
    eprintln!("commands:");
    eprintln!("  detect <text>                            classify as cyrillic/latin/mixed/unknown");
    eprintln!("  convert [--to <script>] [--json] <text>  transliterate (auto direction without --to)");
    eprintln!("  parse [--text <original>] [raw]          recover spell-check JSON from model output");
    eprintln!("  config [--mixed-target <script>] [--raw-limit <n>]  show or update saved settings");
    eprintln!();
    eprintln!("text falls back to stdin when omitted");
}
