use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};

use camino::Utf8Path;
use rust_embed::RustEmbed;

use crate::error::ScaffoldError;

#[derive(RustEmbed)]
#[folder = "templates"]
struct Templates;

pub fn get_bytes(path: &str) -> Result<Vec<u8>, ScaffoldError> {
    let file = Templates::get(path).ok_or_else(|| ScaffoldError::MissingTemplate {
        name: path.to_owned(),
    })?;
    Ok(file.data.as_ref().to_vec())
}

/// Create `destination` with `bytes`, refusing to touch an existing file.
/// Returns `Ok(false)` when the file was already there.
pub fn write_new(destination: &Utf8Path, bytes: &[u8]) -> io::Result<bool> {
    write_new_with(destination, |file| file.write_all(bytes))
}

/// A failed `fill` removes the half-written file so a rerun seeds it again.
fn write_new_with<F>(destination: &Utf8Path, fill: F) -> io::Result<bool>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(destination)
    {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(err) => return Err(err),
    };
    if let Err(err) = fill(&mut file) {
        drop(file);
        if let Err(cleanup) = fs::remove_file(destination) {
            tracing::warn!("could not remove partial {}: {}", destination, cleanup);
        }
        return Err(err);
    }
    Ok(true)
}
