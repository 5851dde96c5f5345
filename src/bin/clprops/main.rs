//! clprops CLI - Tool for inspecting native property lists.
//!
//! Decodes zero-terminated word lists from the command line against any
//! of the known schemas and prints the result as text or JSON.

use std::env;

use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use clprops::prelude::*;
use clprops::core::SchemaEntry;

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse global flags
    let mut level = "warn";
    let mut json_output = false;
    let mut filtered_args: Vec<&str> = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "-v" | "--verbose" => level = "debug",
            "-vv" | "--trace" => level = "trace",
            "-q" | "--quiet" => level = "error",
            "--json" | "-j" => json_output = true,
            _ => filtered_args.push(arg),
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if filtered_args.is_empty() {
        print_usage(&args[0]);
        return;
    }

    match filtered_args[0] {
        "decode" | "d" => {
            if filtered_args.len() < 3 {
                eprintln!("Usage: {} decode <context|sampler|pipe> <word>...", args[0]);
                std::process::exit(1);
            }
            cmd_decode(filtered_args[1], &filtered_args[2..], json_output);
        }
        "keys" | "k" => {
            let kind = filtered_args.get(1).copied();
            cmd_keys(kind);
        }
        "version" | "-V" | "--version" => {
            println!(
                "clprops {} (built {} {})",
                env!("CARGO_PKG_VERSION"),
                env!("CLPROPS_BUILD_DATE"),
                env!("CLPROPS_BUILD_TIME")
            );
        }
        "help" | "h" | "-h" | "--help" => print_usage(&args[0]),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}

fn print_usage(prog: &str) {
    println!("clprops CLI - Inspect native property lists");
    println!();
    println!("Usage: {prog} [options] <command> ...");
    println!();
    println!("Commands:");
    println!("  d, decode <kind> <word>...  Decode a word list (kind: context, sampler, pipe)");
    println!("  k, keys [kind]              List the known keys of one or all schemas");
    println!("  version                     Show version and build date");
    println!("  h, help                     Show this help");
    println!();
    println!("Options:");
    println!("  -j, --json     JSON output for decode");
    println!("  -v, --verbose  Debug output");
    println!("  -vv, --trace   Trace output (very verbose)");
    println!("  -q, --quiet    Errors only");
    println!();
    println!("Words are decimal or 0x-prefixed hex, e.g.:");
    println!("  {prog} decode context 0x1084 0x1000 0x1085 1 0");
}

/// Parse one word argument: decimal, or hex with an 0x prefix.
fn parse_word(s: &str) -> std::result::Result<ClWord, String> {
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        ClWord::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("bad word '{s}': {e}"))
}

fn parse_words(args: &[&str]) -> Vec<ClWord> {
    let mut words = Vec::with_capacity(args.len());
    for arg in args {
        match parse_word(arg) {
            Ok(w) => words.push(w),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
    words
}

fn cmd_decode(kind: &str, word_args: &[&str], json_output: bool) {
    let words = parse_words(word_args);
    info!("decoding {} words as {} properties", words.len(), kind);

    let result = match kind {
        "context" | "ctx" | "c" => {
            ContextProperties::from_property_list(&words).map(|p| render_context(&p, json_output))
        }
        "sampler" | "s" => {
            SamplerProperties::from_property_list(&words).map(|p| render_sampler(&p, json_output))
        }
        "pipe" | "p" => {
            PipeProperties::from_property_list(&words).map(|p| render_pipe(&p, json_output))
        }
        other => {
            eprintln!("Unknown kind: {other} (expected context, sampler or pipe)");
            std::process::exit(1);
        }
    };

    match result {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn additional_json(extra: &AdditionalProperties) -> serde_json::Value {
    extra
        .iter()
        .map(|p| json!([format!("{:#x}", p.key), format!("{:#x}", p.value)]))
        .collect()
}

fn render_context(props: &ContextProperties, json_output: bool) -> String {
    if !json_output {
        return props.to_string();
    }
    let hex = |w: &ClWord| format!("{w:#x}");
    let v = json!({
        "platform": props.platform.map(|p| format!("{p}")),
        "gl_context_khr": props.gl_context_khr.as_ref().map(hex),
        "egl_display_khr": props.egl_display_khr.as_ref().map(hex),
        "glx_display_khr": props.glx_display_khr.as_ref().map(hex),
        "wgl_hdc_khr": props.wgl_hdc_khr.as_ref().map(hex),
        "cgl_share_group_khr": props.cgl_share_group_khr.as_ref().map(hex),
        "interop_user_sync": props.interop_user_sync,
        "d3d10_device_khr": props.d3d10_device_khr.as_ref().map(hex),
        "d3d11_device_khr": props.d3d11_device_khr.as_ref().map(hex),
        "adapter_d3d9_khr": props.adapter_d3d9_khr.as_ref().map(hex),
        "adapter_d3d9ex_khr": props.adapter_d3d9ex_khr.as_ref().map(hex),
        "adapter_dxva_khr": props.adapter_dxva_khr.as_ref().map(hex),
        "memory_initialize_khr": props.memory_initialize_khr,
        "terminate_khr": props.terminate_khr,
        "additional": additional_json(&props.additional),
    });
    debug!("decoded context set: {} additional pairs", props.additional.len());
    v.to_string()
}

fn render_sampler(props: &SamplerProperties, json_output: bool) -> String {
    if !json_output {
        return props.to_string();
    }
    let v = json!({
        "normalized_coords": props.normalized_coords,
        "addressing_mode": props.addressing_mode.map(|m| m.name()),
        "filter_mode": props.filter_mode.map(|m| m.name()),
        "mip_filter_mode_khr": props.mip_filter_mode_khr.map(|m| m.name()),
        "lod_min_khr": props.lod_min_khr,
        "lod_max_khr": props.lod_max_khr,
        "additional": additional_json(&props.additional),
    });
    debug!("decoded sampler set: {} additional pairs", props.additional.len());
    v.to_string()
}

fn render_pipe(props: &PipeProperties, json_output: bool) -> String {
    if !json_output {
        return props.to_string();
    }
    json!({ "additional": additional_json(&props.additional) }).to_string()
}

fn cmd_keys(kind: Option<&str>) {
    match kind {
        Some("context") | Some("ctx") | Some("c") => print_schema::<ContextProperties>(),
        Some("sampler") | Some("s") => print_schema::<SamplerProperties>(),
        Some("pipe") | Some("p") => print_schema::<PipeProperties>(),
        None => {
            print_schema::<ContextProperties>();
            print_schema::<SamplerProperties>();
            print_schema::<PipeProperties>();
        }
        Some(other) => {
            eprintln!("Unknown kind: {other} (expected context, sampler or pipe)");
            std::process::exit(1);
        }
    }
}

fn print_schema<S: PropertySet>() {
    println!("{} ({} keys)", S::KIND, S::schema().len());
    for entry in S::schema() {
        print_entry(entry);
    }
    println!();
}

fn print_entry<S>(entry: &SchemaEntry<S>) {
    println!("  {:#06x}  {:<6}  {}", entry.key, entry.kind.name(), entry.name);
}
