//! Subcommand implementations.

use std::io::Write;
use std::path::Path;

use log::info;
use margincalc::{Field, Session, export};

use crate::error::{Error, Result};
use crate::report::Report;

/// Build the report for the session's current state.
pub fn report(session: &Session) -> Report {
    Report::new(session.inputs, session.formulas, session.results())
}

/// Print the calculation as text or JSON.
pub fn compute(session: &Session, json: bool, out: &mut impl Write) -> Result<()> {
    let report = report(session);
    if json {
        writeln!(out, "{}", report.to_json()?)?;
    } else {
        write!(out, "{report}")?;
    }
    Ok(())
}

/// Write the CSV export to `path`.
///
/// An existing file is only replaced with `force` or after confirmation.
pub fn export(session: &Session, path: &Path, force: bool) -> Result<()> {
    export_with_confirm(session, path, force, |prompt| {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
    })
}

/// [`export`] with the overwrite question answered by `confirm`.
///
/// A prompt that cannot be shown (no terminal) is an error and nothing is
/// written. Only an explicit "no" counts as a cancelled export.
pub fn export_with_confirm<F>(
    session: &Session,
    path: &Path,
    force: bool,
    confirm: F,
) -> Result<()>
where
    F: FnOnce(String) -> dialoguer::Result<bool>,
{
    if path.exists() && !force {
        let confirmed = confirm(format!("{} exists. Overwrite?", path.display()))?;
        if !confirmed {
            return Err(Error::Aborted("Export cancelled.".into()));
        }
    }

    write_export(session, path)
}

/// Write the CSV export to `path`, replacing any existing file.
pub fn write_export(session: &Session, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::Export {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    export::save_csv(path, &session.inputs, &session.results()).map_err(|e| {
        Error::Export {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    info!("Exported calculation to {}", path.display());
    Ok(())
}

/// Print every editable field with its current value.
pub fn list_fields(session: &Session, out: &mut impl Write) -> Result<()> {
    writeln!(out, "  {:<36} {:<38} {:>12}", "KEY", "LABEL", "VALUE")?;
    for field in Field::all() {
        writeln!(
            out,
            "  {:<36} {:<38} {:>12} {}",
            field.key(),
            field.label(),
            session.get(field),
            field.unit()
        )?;
    }
    Ok(())
}
