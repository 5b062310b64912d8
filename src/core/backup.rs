use crate::config::Config;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, optionally zipping it.
    ///
    /// Returns the path actually written, or `None` when the user declined
    /// to overwrite an existing file.
    pub fn backup(
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Existing destination → ask confirmation
        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        if final_target.exists()
            && !force
            && !confirm(&format!(
                "The file '{}' already exists. Overwrite it?",
                final_target.display()
            ))
        {
            warning("Backup cancelled by user.");
            return Ok(None);
        }

        // 4️⃣ Copy database
        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(dest)?;
            if compressed != dest {
                match fs::remove_file(dest) {
                    Ok(()) => info(format!("Removed uncompressed copy: {}", dest.display())),
                    Err(e) => warning(format!("Failed to remove uncompressed backup: {}", e)),
                }
            }
            compressed
        } else {
            dest.to_path_buf()
        };

        // 6️⃣ Audit
        if let Ok(conn) = rusqlite::Connection::open(src)
            && let Err(e) = audit(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            )
        {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(Some(final_path))
    }
}

/// Zip a backup next to itself (`.zip` extension, Deflated).
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bizdesk.sqlite".to_string());

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("📦 Compressed: {}", zip_path.display()));
    Ok(zip_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use std::env;

    fn scratch(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("bizdesk_backup_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn backup_copies_and_compresses() {
        let dir = scratch("zip");
        let db = dir.join("src.sqlite");
        {
            let conn = rusqlite::Connection::open(&db).unwrap();
            init_db(&conn).unwrap();
        }
        let cfg = Config {
            database: db.to_string_lossy().into_owned(),
            ..Config::default()
        };

        let plain = dir.join("copy.sqlite");
        let written = BackupLogic::backup(&cfg, &plain.to_string_lossy(), false, true)
            .unwrap()
            .unwrap();
        assert_eq!(written, plain);
        assert!(plain.exists());

        let zipped = dir.join("packed.sqlite");
        let written = BackupLogic::backup(&cfg, &zipped.to_string_lossy(), true, true)
            .unwrap()
            .unwrap();
        assert_eq!(written, dir.join("packed.zip"));
        assert!(written.exists());
        assert!(!zipped.exists());
    }

    #[test]
    fn missing_database_is_an_error() {
        let dir = scratch("missing");
        let cfg = Config {
            database: dir.join("nope.sqlite").to_string_lossy().into_owned(),
            ..Config::default()
        };
        let res = BackupLogic::backup(&cfg, &dir.join("b.sqlite").to_string_lossy(), false, true);
        assert!(matches!(res, Err(AppError::Io(_))));
    }
}
