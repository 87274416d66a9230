use crate::shared::error::MapperError;
use crate::shared::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Maximum size of a configuration file (1 MB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

fn violation(path: &Path, reason: impl Into<String>, hint: &str) -> anyhow::Error {
    MapperError::SecurityError {
        path: path.to_path_buf(),
        reason: reason.into(),
        hint: hint.to_string(),
    }
    .into()
}

/// Checks a config file before it is read
///
/// A missing file passes, so the read itself reports it with its own hint.
/// Otherwise the path must be a regular file (a symlink is rejected, not
/// followed) no larger than [`MAX_CONFIG_FILE_SIZE`].
pub fn validate_config_file(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(MapperError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into())
        }
    };

    if metadata.is_symlink() {
        return Err(violation(
            path,
            "Config file is a symbolic link",
            "Pass the real config file with -c instead of a link to it",
        ));
    }
    if !metadata.is_file() {
        return Err(violation(
            path,
            "Config file is not a regular file",
            "Pass a YAML or TOML file with -c",
        ));
    }
    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(violation(
            path,
            format!(
                "Config file is too large ({} bytes, limit {} bytes)",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            ),
            "Keep the dependency list in a smaller config file",
        ));
    }

    Ok(())
}

/// Checks the generated file's destination before it is replaced
///
/// A destination that does not exist yet passes. An existing one must not be
/// a symbolic link, since renaming over it would redirect the write.
pub fn validate_output_target(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(violation(
            path,
            "Output path is a symbolic link",
            "Point the output at a regular file instead of a symbolic link",
        )),
        _ => Ok(()),
    }
}
