use std::path::{Path, PathBuf};

/// Every file under `folder_path` with the given extension, recursively, sorted by path.
pub fn read_folder(folder_path: &Path, extension: &str) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(read_folder(&path, extension)?);
        } else if path.extension().is_some_and(|ext| ext == extension) {
            files.push(path);
        }
    }

    files.sort();

    Ok(files)
}

/// Files to optimize: the input itself, or every `.txt` file below it when it is a folder.
pub fn input_files(input: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    if input.is_dir() {
        read_folder(input, "txt")
    } else {
        Ok(vec![input.to_path_buf()])
    }
}
