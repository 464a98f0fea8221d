use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{self, Write};
use std::path::Path;

/// Gate writing to an output path. A missing file or `force` passes
/// straight through; an existing file asks for confirmation.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(()),
        _ => Err(AppError::Export(
            "cancelled: existing file not overwritten".to_string(),
        )),
    }
}
