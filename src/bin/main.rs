use crossterm::style::Stylize;
use hebrew_core::{EngineConfig, GematriaMethod, HebrewEngine, Result};
use std::io::{self, stderr, stdin, BufRead, Write};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

enum Command<'a> {
    Gematria(Option<GematriaMethod>, &'a str),
    Number(&'a str),
    Search(&'a str),
    Glyphs(&'a str),
    Export(&'a str),
    Exit,
}

fn main() {
    // Logs, help and the prompt go to stderr so stdout only carries results.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = EngineConfig::from_env().unwrap_or_else(|e| {
        warn!(error = %e, "could not load engine config, using defaults");
        EngineConfig::default()
    });
    info!(method = %config.default_method, "engine ready");
    let engine = HebrewEngine::new(config);

    print_help();
    let mut lines = stdin().lock().lines();
    loop {
        if let Err(e) = write_prompt(&mut stderr()) {
            warn!(error = %e, "failed to write prompt");
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                warn!(error = %e, "failed to read input");
                break;
            }
            None => break,
        };

        let command = match parse_command(line.trim()) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{}", message.red());
                continue;
            }
        };
        if let Command::Exit = command {
            break;
        }
        if let Err(e) = run(&engine, command) {
            println!("{} {}", "error:".red().bold(), e);
        }
    }
}

fn parse_command(line: &str) -> std::result::Result<Option<Command<'_>>, String> {
    if line.is_empty() {
        return Ok(None);
    }
    let (keyword, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let command = match keyword.to_ascii_uppercase().as_str() {
        "GEMATRIA" => {
            // The method is optional; a first word that is not a method is text.
            let (first, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            match first.parse::<GematriaMethod>() {
                Ok(method) => Command::Gematria(Some(method), text.trim()),
                Err(_) => Command::Gematria(None, rest),
            }
        }
        "NUMBER" => Command::Number(rest),
        "SEARCH" => Command::Search(rest),
        "GLYPHS" => Command::Glyphs(rest),
        "EXPORT" if !rest.is_empty() => Command::Export(rest),
        "EXPORT" => return Err("EXPORT needs a path".to_string()),
        "EXIT" | "QUIT" => Command::Exit,
        "HELP" => {
            print_help();
            return Ok(None);
        }
        other => return Err(format!("unknown command '{other}', type HELP")),
    };
    Ok(Some(command))
}

fn run(engine: &HebrewEngine, command: Command<'_>) -> Result<()> {
    match command {
        Command::Gematria(method, text) => {
            let value = engine.gematria(text, method)?;
            let method = method.unwrap_or(engine.config().default_method);
            println!("{} {}", format!("[{method}]").cyan(), value.to_string().green().bold());
        }
        Command::Number(n) => match n.parse::<i64>() {
            Ok(n) => println!("{}", engine.number(n)?.green().bold()),
            Err(_) => println!("{} '{}' is not an integer", "error:".red().bold(), n),
        },
        Command::Search(name) => match engine.search(name) {
            Some(c) => println!("{} {} ({:?})", c.text.green().bold(), c.name, c.category),
            None => println!("{}", format!("no character named '{name}'").yellow()),
        },
        Command::Glyphs(text) => {
            for (glyph, character) in engine.glyphs(text) {
                match character {
                    Some(c) => println!("  {}  {} ({:?})", glyph.bold(), c.name, c.category),
                    None => println!("  {}  {}", glyph.bold(), "unknown".dark_grey()),
                }
            }
        }
        Command::Export(path) => {
            let count = engine.export(Path::new(path))?;
            println!("{} {} characters to '{}'", "exported".green(), count, path);
        }
        Command::Exit => {}
    }
    Ok(())
}

fn write_prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{} ", ">".dark_grey())?;
    out.flush()
}

fn print_help() {
    eprintln!("{}", "Hebrew text engine".bold());
    eprintln!("---------------------------------------------------------------");
    eprintln!("  GEMATRIA [method] <text>   value of text (e.g. mispar_gadol)");
    eprintln!("  NUMBER <n>                 Hebrew numeral for n");
    eprintln!("  SEARCH <name>              character by English name");
    eprintln!("  GLYPHS <text>              catalog entry for each glyph");
    eprintln!("  EXPORT <path>              write the catalog as JSON");
    eprintln!("  EXIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_is_written_to_the_given_stream() {
        let mut out = Vec::new();
        write_prompt(&mut out).unwrap();
        let prompt = String::from_utf8(out).unwrap();
        assert!(prompt.contains('>'));
        assert!(prompt.ends_with(' '));
    }

    #[test]
    fn gematria_method_is_optional() {
        match parse_command("GEMATRIA mispar_gadol שלום") {
            Ok(Some(Command::Gematria(Some(GematriaMethod::MisparGadol), "שלום"))) => {}
            _ => panic!("method not parsed"),
        }
        match parse_command("gematria שלום עולם") {
            Ok(Some(Command::Gematria(None, "שלום עולם"))) => {}
            _ => panic!("text without a method not parsed"),
        }
    }

    #[test]
    fn malformed_commands() {
        assert!(matches!(parse_command(""), Ok(None)));
        assert!(parse_command("EXPORT").is_err());
        assert!(parse_command("FROBNICATE x").is_err());
        assert!(matches!(parse_command("exit"), Ok(Some(Command::Exit))));
    }
}
