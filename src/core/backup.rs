use crate::errors::{AppError, AppResult};
use crate::storage::EmployeeStore;
use crate::storage::log::ttlog_or_warn;
use crate::ui::messages::{confirm, info, success};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the employees file to `dest_file`, optionally as a zip archive.
    ///
    /// Returns the final backup path, or `None` when the operator declined to
    /// overwrite an existing file.
    pub fn backup(
        store: &EmployeeStore,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = store.path();
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Employees file not found: {}", src.display()),
            )));
        }

        let final_path = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if final_path == src {
            return Err(AppError::InvalidArgument(format!(
                "backup file must differ from the employees file: {}",
                src.display()
            )));
        }

        if let Some(parent) = final_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if final_path.exists()
            && !force
            && !confirm(&format!(
                "The file '{}' already exists. Overwrite?",
                final_path.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        if compress {
            compress_backup(src, &final_path)?;
        } else {
            fs::copy(src, &final_path)?;
        }
        success(format!("Backup created: {}", final_path.display()));

        ttlog_or_warn(
            &store.log_path(),
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

/// Write `src` as the single entry of the zip archive `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<()> {
    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "employees.csv".to_string());

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(())
}
