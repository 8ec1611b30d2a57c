//! Interactive editor: change fields one at a time and watch the result move.
//!
//! The terminal acts as the embedding host. It has no colour preferences, and
//! the dismiss action it receives is bound to the `quit` command.

use std::cell::Cell;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::debug;
use margincalc::host::{self, HostShell, HostTheme};
use margincalc::{EditOutcome, Field, Session};

use crate::commands;
use crate::error::Result;

/// Terminal host: no theme, one dismiss action.
#[derive(Default)]
pub struct TerminalHost {
    dismiss: Option<(String, Box<dyn FnMut()>)>,
}

impl TerminalHost {
    /// Label of the registered dismiss action, if any.
    pub fn dismiss_label(&self) -> Option<&str> {
        self.dismiss.as_ref().map(|(label, _)| label.as_str())
    }

    /// Run the registered dismiss action. Returns false when none is set.
    pub fn dismiss(&mut self) -> bool {
        match self.dismiss.as_mut() {
            Some((_, action)) => {
                action();
                true
            }
            None => false,
        }
    }
}

impl HostShell for TerminalHost {
    fn theme_colors(&self) -> Option<HostTheme> {
        None
    }

    fn register_dismiss(&mut self, label: &str, action: Box<dyn FnMut()>) {
        self.dismiss = Some((label.to_string(), action));
    }
}

/// Run the editor until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
    export_file: &Path,
) -> Result<()> {
    let mut terminal = TerminalHost::default();
    let closed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&closed);
    let theme = host::attach(&mut terminal, move || flag.set(true));
    debug!("host theme: {} on {}", theme.text, theme.background);

    writeln!(out, "Listing profitability calculator")?;
    writeln!(out, "Type 'help' for commands, 'quit' to exit.\n")?;
    print_summary(session, out)?;

    while !closed.get() {
        write!(out, "calc> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts.first().map(|s| s.to_lowercase());

        match cmd.as_deref() {
            Some("help" | "h" | "?") => print_help(out, terminal.dismiss_label())?,
            Some("quit" | "exit" | "q") => {
                terminal.dismiss();
            }
            Some("show" | "s") => commands::compute(session, false, out)?,
            Some("fields" | "f") => commands::list_fields(session, out)?,
            Some("set") => handle_set(session, &parts[1..], out)?,
            Some("reset") => {
                session.reset();
                writeln!(out, "Restored defaults.")?;
                print_summary(session, out)?;
            }
            Some("export") => {
                let path = parts
                    .get(1)
                    .map(|p| PathBuf::from(*p))
                    .unwrap_or_else(|| export_file.to_path_buf());
                match commands::write_export(session, &path) {
                    Ok(()) => writeln!(out, "Exported to {}", path.display())?,
                    Err(e) => writeln!(out, "Error: {e}")?,
                }
            }
            Some(cmd) => writeln!(out, "Unknown command: '{cmd}'. Type 'help' for commands.")?,
            None => {}
        }
    }

    writeln!(out, "Goodbye!")?;
    Ok(())
}

fn handle_set<W: Write>(session: &mut Session, args: &[&str], out: &mut W) -> Result<()> {
    let Some(name) = args.first() else {
        writeln!(out, "Usage: set <field> <value>")?;
        return Ok(());
    };

    let field: Field = match name.parse() {
        Ok(f) => f,
        Err(e) => {
            writeln!(out, "{e}. Type 'fields' for the list.")?;
            return Ok(());
        }
    };

    let Some(&raw) = args.get(1) else {
        writeln!(out, "Usage: set <field> <value>")?;
        return Ok(());
    };
    match session.edit(field, raw) {
        EditOutcome::Applied(value) => debug!("{field} = {value}"),
        EditOutcome::Discarded => debug!("discarded non-numeric edit '{raw}' for {field}"),
    }

    writeln!(out, "{} = {} {}", field.key(), session.get(field), field.unit())?;
    print_summary(session, out)
}

fn print_summary<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    let r = session.results();
    writeln!(
        out,
        "  price for buyer {:.2} | logistics {:.2} | profit {:.2} | margin {:.2}%",
        r.price_on_platform, r.total_logistics, r.total_profit, r.profit_margin
    )?;
    Ok(())
}

fn print_help<W: Write>(out: &mut W, dismiss_label: Option<&str>) -> Result<()> {
    writeln!(
        out,
        r#"
Commands:
  set <field> <value>           Change a field (e.g. set price 12000)
  show                          Show the full breakdown
  fields                        List fields, units and current values
  reset                         Restore default values
  export [path]                 Write the CSV export
  help                          Show this help
  quit                          {}

Fields accept snake_case keys or camelCase names (buyout_percent, buyoutPercent).
Values that are not numbers are ignored and the previous value is kept.
"#,
        dismiss_label.unwrap_or("Exit")
    )?;
    Ok(())
}
