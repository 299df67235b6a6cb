use std::io;
use std::path::Path;

use crate::error::CheckError;
use crate::filenames::is_license_filename;
use crate::models::LicenseFile;

/// A directory that can list its entry names and read an entry by name.
pub trait DirNames {
    /// Up to `limit` entry names in directory order, or all of them when `limit` is `0`.
    fn dir_names(&self, limit: usize) -> io::Result<Vec<String>>;

    /// Full contents of the entry `name` in this directory.
    fn read_file(&self, name: &str) -> io::Result<Vec<u8>>;
}

impl DirNames for Path {
    fn dir_names(&self, limit: usize) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(self)? {
            if limit > 0 && names.len() == limit {
                break;
            }
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn read_file(&self, name: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.join(name))
    }
}

/// Find the license file in `dir` and read it.
///
/// Names are scanned in listing order and the first one accepted by
/// [`is_license_filename`] wins; listing order is whatever the directory reports.
pub fn read_license_dir<D>(dir: &D) -> Result<LicenseFile, CheckError>
where
    D: DirNames + ?Sized,
{
    let names = dir.dir_names(0)?;

    let Some(filename) = names.into_iter().find(|name| {
        let hit = is_license_filename(name);
        if !hit {
            log::trace!("skipping {}", name);
        }
        hit
    }) else {
        return Err(CheckError::NotFound);
    };

    log::debug!("found license file {}", filename);

    match dir.read_file(&filename) {
        Ok(contents) => Ok(LicenseFile { filename, contents }),
        Err(source) => Err(CheckError::Read { filename, source }),
    }
}

/// Find and read the license file in the current directory.
pub fn read_license() -> Result<LicenseFile, CheckError> {
    read_license_dir(Path::new("."))
}
