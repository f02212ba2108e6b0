use colored::Colorize;
use std::io::{self, Write};
use tessera_core::ProgressEvent;

pub fn print_json(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

pub fn print_text(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

/// Print one progress event with a status marker
pub fn print_event(event: &ProgressEvent) -> io::Result<()> {
    let mut out = io::stdout().lock();
    match event {
        ProgressEvent::Started { .. } => writeln!(out, "{} {}", "→".cyan(), event),
        ProgressEvent::CreatedFile { .. } => writeln!(out, "{} {}", "✓".green().bold(), event),
        ProgressEvent::Failed { .. } => writeln!(out, "{}", event.to_string().red()),
    }
}

/// Echo a finished progress log
pub fn print_log(events: &[ProgressEvent]) -> io::Result<()> {
    for event in events {
        print_event(event)?;
    }
    Ok(())
}
