//! Zip packaging of the output tree.

use std::fs::{self, File};
use std::io::{self, BufWriter, Seek, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::OutputResult;

/// Zip everything under `src` into `dest`, with entry names relative to
/// `src` and `/`-separated.  Entries are written in sorted path order.
///
/// If `dest` lies inside `src` it is left out of its own archive.  Returns
/// the number of file entries written.
pub fn zip_dir(src: &Path, dest: &Path) -> OutputResult<usize> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(dest)?;
    let dest = fs::canonicalize(dest)?;

    let mut zip = ZipWriter::new(BufWriter::new(file));
    let mut files = 0;
    add_dir(&mut zip, src, src, &dest, &mut files)?;
    zip.finish()?.flush()?;
    Ok(files)
}

fn add_dir<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    root: &Path,
    dir: &Path,
    skip: &Path,
    files: &mut usize,
) -> OutputResult<()> {
    for path in sorted_children(dir)? {
        let name = entry_name(root, &path);
        if path.is_dir() {
            zip.add_directory(format!("{name}/"), file_options())?;
            add_dir(zip, root, &path, skip, files)?;
        } else if fs::canonicalize(&path)? != skip {
            zip.start_file(name, file_options())?;
            io::copy(&mut File::open(&path)?, zip)?;
            *files += 1;
        }
    }
    Ok(())
}

fn file_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

fn sorted_children(dir: &Path) -> OutputResult<Vec<PathBuf>> {
    let mut children = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    children.sort();
    Ok(children)
}

fn entry_name(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
