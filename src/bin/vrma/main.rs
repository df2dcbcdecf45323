//! vrma CLI - Tool for inspecting VRMA/GLB animation containers.

use std::env;
use std::path::Path;
use std::process;

use vrma::document::Document;
use vrma::glb::Glb;
use vrma::meta::AnimationMetadata;

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse global flags
    let mut verbosity = 0i8;
    let mut filtered_args: Vec<&str> = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "-v" | "--verbose" => verbosity = 1,
            "-vv" | "--trace" => verbosity = 2,
            "-q" | "--quiet" => verbosity = -1,
            _ => filtered_args.push(arg),
        }
    }
    init_tracing(verbosity);

    if filtered_args.is_empty() {
        print_help();
        return;
    }

    match filtered_args[0] {
        // Info command - container and document summary
        "info" | "i" => {
            if filtered_args.len() < 2 {
                eprintln!("Error: missing file argument");
                eprintln!("Usage: vrma-cli info <file.vrma>");
                process::exit(1);
            }
            cmd_info(filtered_args[1]);
        }

        // Meta command - extracted timing metadata
        "meta" | "m" => {
            if filtered_args.len() < 2 {
                eprintln!("Error: missing file argument");
                eprintln!("Usage: vrma-cli meta <file.vrma> [--json]");
                process::exit(1);
            }
            let json_mode = filtered_args.iter().any(|&s| s == "--json" || s == "-j");
            let file = filtered_args[1..]
                .iter()
                .find(|&&s| s != "--json" && s != "-j")
                .copied();
            match file {
                Some(file) => cmd_meta(file, json_mode),
                None => {
                    eprintln!("Error: missing file argument");
                    process::exit(1);
                }
            }
        }

        // Help
        "help" | "h" | "-h" | "--help" => print_help(),

        // Default: if file exists, show info; otherwise error
        _ => {
            if Path::new(filtered_args[0]).exists() {
                cmd_info(filtered_args[0]);
            } else {
                eprintln!("Unknown command: {}", filtered_args[0]);
                eprintln!();
                print_help();
                process::exit(1);
            }
        }
    }
}

fn init_tracing(verbosity: i8) {
    let default = match verbosity {
        ..=-1 => "error",
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load(path: &str) -> (Glb, Document) {
    let glb = match Glb::open(path) {
        Ok(glb) => glb,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let doc = match Document::from_slice(glb.json()) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    (glb, doc)
}

fn cmd_info(path: &str) {
    let (glb, doc) = load(path);

    println!("File:       {}", path);
    println!("Container:  GLB version {}, {} bytes", glb.version(), glb.declared_len());
    println!("JSON chunk: {} bytes", glb.json().len());
    match glb.bin() {
        Some(bin) => println!("BIN chunk:  {} bytes", bin.len()),
        None => println!("BIN chunk:  none"),
    }

    println!();
    println!("Asset version: {}", doc.asset.version);
    if let Some(generator) = &doc.asset.generator {
        println!("Generator:     {}", generator);
    }
    println!("Accessors:     {}", doc.accessors.len());
    println!("Buffers:       {}", doc.buffers.len());
    println!("Animations:    {}", doc.animations.len());
    for (i, anim) in doc.animations.iter().enumerate() {
        println!(
            "  [{}] {} - {} channels, {} samplers",
            i,
            anim.name.as_deref().unwrap_or("<unnamed>"),
            anim.channels.len(),
            anim.samplers.len()
        );
    }

    let meta = AnimationMetadata::from_document(&doc);
    println!();
    print_meta(&meta);
}

fn cmd_meta(path: &str, json_mode: bool) {
    let (_, doc) = load(path);
    let meta = AnimationMetadata::from_document(&doc);

    if json_mode {
        match serde_json::to_string_pretty(&meta) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_meta(&meta);
    }
}

fn print_meta(meta: &AnimationMetadata) {
    println!("Duration:    {} s", meta.duration);
    println!("Framerate:   {} fps", meta.framerate);
    println!("Frame count: {}", meta.frame_count);
}

fn print_help() {
    println!("vrma-cli - inspect VRMA/GLB animation containers");
    println!();
    println!("Usage: vrma-cli [flags] <command> [args]");
    println!();
    println!("Commands:");
    println!("  info, i <file>           Container and document summary");
    println!("  meta, m <file> [--json]  Extracted timing metadata");
    println!("  help, h                  Show this help");
    println!();
    println!("Flags:");
    println!("  -v, --verbose   Debug diagnostics");
    println!("  -vv, --trace    Trace diagnostics");
    println!("  -q, --quiet     Errors only");
}
