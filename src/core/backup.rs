//! Database backup: plain file copy, optionally zipped afterwards.

use crate::config::Config;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(AppError::Other(format!(
                "Database not found: {}",
                src.display()
            )));
        }
        if dest.exists() && !force {
            return Err(AppError::Other(format!(
                "The file '{}' already exists (use --force to overwrite)",
                dest.display()
            )));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if compress {
            let archive = zip_file(dest)?;
            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Could not remove uncompressed copy: {}", e));
            }
            archive
        } else {
            dest.to_path_buf()
        };

        // Audit on the source database; the copy stays untouched.
        let conn = Connection::open(src)?;
        audit(
            &conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created (compressed)"
            } else {
                "Backup created"
            },
        )?;

        Ok(())
    }
}

/// Wrap a file into a single-entry zip archive next to it.
fn zip_file(path: &Path) -> AppResult<PathBuf> {
    let archive_path = path.with_extension("zip");
    let mut zip = ZipWriter::new(fs::File::create(&archive_path)?);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "backup.sqlite".to_string());

    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;
    std::io::copy(&mut fs::File::open(path)?, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("Compressed: {}", archive_path.display()));
    Ok(archive_path)
}
