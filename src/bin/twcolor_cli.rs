//! CLI tool for twcolor - resolves color tokens and queries the palette
//!
//! Usage:
//!   twcolor_cli resolve <token> [format] [--fallback <token>]
//!   twcolor_cli find [--colors a,b] [--tones 100,500] [--min N] [--max N] [format]
//!   twcolor_cli random [--seed S] [--colors a,b] [--tones ..] [--min N] [--max N] [format]
//!   twcolor_cli invert <token> [format]
//!   twcolor_cli lod <token> <amount>
//!
//! Any command accepts `--config <file.json>`. Set `RUST_LOG=debug` for logs.

#![allow(clippy::exit)]

use std::env;
use std::path::Path;
use std::process;

use tracing_subscriber::EnvFilter;
use twcolor::{
    ColorService, ColorValue, FindOptions, FormatMode, LodAmount, RandomOptions, ServiceConfig,
    Tone,
};

const USAGE: &str = "Usage: twcolor_cli <resolve|find|random|invert|lod> [args] [--config file.json]";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    if let Err(message) = run(&mut args) {
        eprintln!("Error: {message}");
        process::exit(1);
    }
}

fn run(args: &mut Vec<String>) -> Result<(), String> {
    let service = match take_flag(args, "--config")? {
        Some(path) => {
            let config = ServiceConfig::load(Path::new(&path))
                .map_err(|e| format!("loading {path}: {e}"))?;
            ColorService::with_config(&config).map_err(|e| e.to_string())?
        }
        None => ColorService::new(),
    };

    if args.is_empty() {
        return Err(USAGE.to_string());
    }
    let command = args.remove(0);

    match command.as_str() {
        "resolve" => {
            let fallback = take_flag(args, "--fallback")?;
            let token = positional(args, 0, "token")?;
            let format = format_arg(args, 1)?;
            let value = match fallback {
                Some(fallback) => service.resolve_or(token.as_str(), fallback),
                None => service.resolve(token.as_str()),
            }
            .ok_or_else(|| format!("unresolvable color: {token}"))?;
            print_value(&value, format);
        }
        "find" => {
            let options = find_options(args)?;
            let format = format_arg(args, 0)?;
            for value in service.find(&options) {
                print_value(&value, format);
            }
        }
        "random" => {
            let seed = take_flag(args, "--seed")?;
            let mut options = RandomOptions::from(find_options(args)?);
            options.seed = seed;
            let format = format_arg(args, 0)?;
            let value = service.random(&options).map_err(|e| e.to_string())?;
            print_value(&value, format);
        }
        "invert" => {
            let token = positional(args, 0, "token")?;
            let format = format_arg(args, 1)?;
            let value = service
                .invert(token.as_str(), None)
                .ok_or_else(|| format!("unresolvable color: {token}"))?;
            print_value(&value, format);
        }
        "lod" => {
            let token = positional(args, 0, "token")?;
            let amount = positional(args, 1, "amount")?;
            let amount: f32 = amount
                .parse()
                .map_err(|_| format!("invalid amount: {amount}"))?;
            let format = format_arg(args, 2)?;
            let value = service
                .lighten_or_darken(token.as_str(), Some(LodAmount::Uniform(amount)))
                .ok_or_else(|| format!("unresolvable color: {token}"))?;
            print_value(&value, format);
        }
        other => return Err(format!("unknown command '{other}'\n{USAGE}")),
    }

    Ok(())
}

fn print_value(value: &ColorValue, format: Option<FormatMode>) {
    println!("{}", value.format(format));
}

/// Remove `--name <value>` from `args`
fn take_flag(args: &mut Vec<String>, name: &str) -> Result<Option<String>, String> {
    let Some(index) = args.iter().position(|a| a == name) else {
        return Ok(None);
    };
    args.remove(index);
    if index < args.len() {
        Ok(Some(args.remove(index)))
    } else {
        Err(format!("{name} needs a value"))
    }
}

fn positional(args: &[String], index: usize, what: &str) -> Result<String, String> {
    args.get(index)
        .cloned()
        .ok_or_else(|| format!("missing {what}\n{USAGE}"))
}

fn format_arg(args: &[String], index: usize) -> Result<Option<FormatMode>, String> {
    args.get(index)
        .map(|f| f.parse::<FormatMode>().map_err(|e| e.to_string()))
        .transpose()
}

fn find_options(args: &mut Vec<String>) -> Result<FindOptions, String> {
    let mut options = FindOptions::new();
    if let Some(colors) = take_flag(args, "--colors")? {
        options = options.colors(colors.split(',').map(str::trim).filter(|c| !c.is_empty()));
    }
    if let Some(tones) = take_flag(args, "--tones")? {
        options = options.tones(
            tones
                .split(',')
                .map(parse_tone)
                .collect::<Result<Vec<_>, _>>()?,
        );
    }
    if let Some(min) = take_flag(args, "--min")? {
        options = options.min_tone(parse_tone(&min)?);
    }
    if let Some(max) = take_flag(args, "--max")? {
        options = options.max_tone(parse_tone(&max)?);
    }
    Ok(options)
}

fn parse_tone(s: &str) -> Result<Tone, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("invalid tone: {s}"))
}
