//! shadetag CLI
//!
//! Tags GLSL and OpenCL C reserved words the way an editor plugin would.

use shadetag::{init_tracing, render_keywords, render_tags, tag_file, TagOptions};
use shadetag_lang::Language;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "tag" => {
            if args.len() < 3 {
                eprintln!("Usage: shadetag tag <file> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --lang=<glsl|opencl>   Language (default: from file extension)");
                eprintln!("  --range=<start>..<end> Byte range to tag (default: whole file)");
                std::process::exit(1);
            }
            let path = std::path::Path::new(&args[2]);
            let result = TagOptions::parse(&args[3..]).and_then(|options| tag_file(path, &options));
            match result {
                Ok((text, tags)) => print!("{}", render_tags(&text, &tags)),
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            }
        }
        "keywords" => {
            if args.len() < 3 {
                eprintln!("Usage: shadetag keywords <glsl|opencl>");
                std::process::exit(1);
            }
            match args[2].parse::<Language>() {
                Ok(language) => print!("{}", render_keywords(language)),
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("shadetag {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("shadetag - GLSL / OpenCL C keyword tagger");
    println!();
    println!("Usage: shadetag <command> [args]");
    println!();
    println!("Commands:");
    println!("  tag <file> [--lang=..] [--range=..]  Print keyword tags for a file");
    println!("  keywords <glsl|opencl>              List a language's vocabulary");
    println!("  help                                Show this message");
    println!("  version                             Show version");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=shadetag_core=trace) for tracing output.");
}
