//! Human-friendly CLI output formatters.
//!
//! Each `fmt_*` function formats one tool's output for terminal display.
//! When `color` is true, ANSI escape codes are emitted via `owo_colors`.

use crate::tools::{ListOutput, SearchOutput};
use owo_colors::OwoColorize;
use std::io::{self, Write};

// ── search ──────────────────────────────────────────────────────────────────

pub fn fmt_search(w: &mut impl Write, out: &SearchOutput, color: bool) -> io::Result<()> {
    if out.matches.is_empty() {
        if color {
            writeln!(w, "{}", format_args!("No results found for '{}'.", out.query).dimmed())?;
        } else {
            writeln!(w, "No results found for '{}'.", out.query)?;
        }
        return Ok(());
    }

    for m in &out.matches {
        // Path:line header
        if color {
            writeln!(w, "{}:{}", m.path.bold(), m.line)?;
        } else {
            writeln!(w, "{}:{}", m.path, m.line)?;
        }

        // Context lines with a gutter; the matched line stands out
        for (i, line) in m.context.lines().enumerate() {
            let number = m.context_start + i;
            if color && number == m.line {
                writeln!(w, "  {}{}", format_args!("{number:>5}│ ").green(), line.bold())?;
            } else if color {
                writeln!(w, "  {}{}", format_args!("{number:>5}│ ").dimmed(), line)?;
            } else {
                writeln!(w, "  {number:>5}│ {line}")?;
            }
        }
        writeln!(w)?;
    }

    Ok(())
}

// ── list ────────────────────────────────────────────────────────────────────

pub fn fmt_list(w: &mut impl Write, out: &ListOutput, color: bool) -> io::Result<()> {
    for (i, section) in out.sections.iter().enumerate() {
        if i > 0 {
            writeln!(w)?;
        }
        if color {
            writeln!(w, "{} ({})", section.title.bold(), section.fetch_tool.dimmed())?;
        } else {
            writeln!(w, "{} ({})", section.title, section.fetch_tool)?;
        }

        for entry in &section.entries {
            if color {
                writeln!(w, "  {:<20} {}", entry.key.green(), entry.description)?;
            } else {
                writeln!(w, "  {:<20} {}", entry.key, entry.description)?;
            }
        }
    }

    Ok(())
}
