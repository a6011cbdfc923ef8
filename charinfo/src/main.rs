//! Show the ASCII and Unicode codes of a character.
//!
//! Usage:
//!   charinfo [-e <encoding>] [text]
//!   charinfo -l
//!
//! Only the first character of the text is analyzed. Without a text argument
//! the text is read from stdin.

use std::env;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use charcode::registry;

const PLACEHOLDER: &str = "enter a character to see its ASCII and Unicode codes";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let result = run(
        &args,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );

    match result {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            eprintln!("Error writing output: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Runs the tool over `args` (program name first), returning the exit status.
fn run(
    args: &[String],
    stdin: &mut impl Read,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<u8> {
    let program = args.first().map_or("charinfo", String::as_str);

    let mut encoding: Option<String> = None;
    let mut text: Option<String> = None;
    let mut list_encodings = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-e" | "--encoding" => {
                i += 1;
                if i >= args.len() {
                    writeln!(err, "Error: -e requires an encoding name")?;
                    return Ok(1);
                }
                encoding = Some(args[i].clone());
            }
            "-l" | "--list" => {
                list_encodings = true;
            }
            "-h" | "--help" => {
                print_usage(err, program)?;
                return Ok(0);
            }
            "--" => {
                // Everything after `--` is text, still at most one argument
                for arg in &args[i + 1..] {
                    if !set_text(&mut text, arg, err)? {
                        return Ok(1);
                    }
                }
                break;
            }
            arg if arg.starts_with('-') && arg.len() > 1 => {
                writeln!(err, "Error: Unknown option: {}", arg)?;
                return Ok(1);
            }
            arg => {
                if !set_text(&mut text, arg, err)? {
                    return Ok(1);
                }
            }
        }
        i += 1;
    }

    if list_encodings {
        let mut names: Vec<_> = registry::encodings()
            .map(|enc| (enc.name(), enc.unit_bits()))
            .collect();
        names.sort_unstable();

        writeln!(out, "Encodings:")?;
        for (name, bits) in &names {
            writeln!(out, "  {:<8}{}-bit units", name, bits)?;
        }
        return Ok(0);
    }

    let input = match text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            if let Err(e) = stdin.read_to_string(&mut buf) {
                writeln!(err, "Error reading stdin: {}", e)?;
                return Ok(1);
            }
            strip_line_ending(buf)
        }
    };

    // An empty field shows the placeholder, not an error
    if input.is_empty() {
        log::debug!("empty input, showing placeholder");
        writeln!(out, "{}", PLACEHOLDER)?;
        return Ok(0);
    }

    let report = match charcode::analyze(&input) {
        Ok(report) => report,
        Err(e) => {
            writeln!(err, "Error: {}", e)?;
            return Ok(1);
        }
    };

    match encoding {
        Some(name) => match registry::find_encoding(&name) {
            Ok(enc) => writeln!(out, "{}", enc.format_units(report.character()))?,
            Err(e) => {
                writeln!(err, "Error: {}", e)?;
                return Ok(1);
            }
        },
        None => writeln!(out, "{}", report)?,
    }

    Ok(0)
}

/// Stores the text argument. Returns `false` after reporting a second one.
fn set_text(text: &mut Option<String>, arg: &str, err: &mut impl Write) -> io::Result<bool> {
    if text.is_some() {
        writeln!(err, "Error: only one text argument is accepted")?;
        return Ok(false);
    }
    *text = Some(arg.to_string());
    Ok(true)
}

/// Drops a single trailing `\n` or `\r\n` left by line-oriented input.
fn strip_line_ending(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}

fn print_usage(err: &mut impl Write, program: &str) -> io::Result<()> {
    writeln!(err, "Usage: {} [-e <encoding>] [text]", program)?;
    writeln!(err, "       {} -l", program)?;
    writeln!(err)?;
    writeln!(err, "Options:")?;
    writeln!(err, "  -e, --encoding <encoding>   Print only this encoding's code units")?;
    writeln!(err, "  -l, --list                  List available encodings")?;
    writeln!(err, "  -h, --help                  Show this help")
}
