//! View-model rendering for the terminal shell.

use std::io::{self, Write};

use flourish_core::PageViewModel;

/// Console usage, printed once at startup.
pub const HELP: &str = "commands: copy <n> | check <asn> | quit";

/// Renders the view model as terminal lines.
pub fn render(view: &PageViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("metrics:".to_string());
    for counter in &view.counters {
        lines.push(format!("  {:<20} {:>10}", counter.label, counter.text));
    }
    for ring in &view.rings {
        let (circumference, _) = ring.dash_array;
        let revealed = if circumference > 0.0 {
            (1.0 - ring.dash_offset / circumference) * 100.0
        } else {
            0.0
        };
        lines.push(format!("  {:<20} {:>9.2}% arc", ring.label, revealed));
    }

    if !view.copy_buttons.is_empty() {
        lines.push("references:".to_string());
        for (index, button) in view.copy_buttons.iter().enumerate() {
            lines.push(format!("  [{index}] {:<18} [{}]", button.key, button.markup));
        }
    }

    if let Some(lookup) = &view.lookup {
        if lookup.visible {
            let marker = if lookup.affected {
                " (affected)"
            } else if lookup.safe {
                " (safe)"
            } else {
                ""
            };
            lines.push(format!("as-checker: {}{}", lookup.message, marker));
        } else {
            lines.push("as-checker: no result yet".to_string());
        }
    }

    lines
}

/// Redraws in place: moves the cursor up over the previous frame and
/// rewrites every line. Returns the number of lines drawn.
pub fn redraw(view: &PageViewModel, previous_lines: usize) -> io::Result<usize> {
    let lines = render(view);
    let mut stdout = io::stdout().lock();
    if previous_lines > 0 {
        write!(stdout, "\x1b[{previous_lines}A")?;
    }
    for line in &lines {
        writeln!(stdout, "\x1b[2K{line}")?;
    }
    stdout.flush()?;
    Ok(lines.len())
}
