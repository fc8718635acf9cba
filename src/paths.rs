use std::io;
use std::path::{Path, PathBuf};

/// Fixed source filename, looked up next to the executable.
pub const INPUT_FILENAME: &str = "README.html";
/// Fixed destination filename, written next to the executable.
pub const OUTPUT_FILENAME: &str = "README.pdf";
/// Optional page-setup override, also looked up next to the executable.
pub const CONFIG_FILENAME: &str = "readme2pdf.toml";

/// Directory containing the running executable.
pub fn exe_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "executable has no parent directory"))
}

/// Absolute input and output paths for a conversion rooted at `dir`.
pub fn conversion_paths(dir: &Path) -> (PathBuf, PathBuf) {
    (dir.join(INPUT_FILENAME), dir.join(OUTPUT_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_share_the_parent_directory() {
        let (input, output) = conversion_paths(Path::new("/opt/tool"));
        assert_eq!(input.parent(), output.parent());
        assert_eq!(input, Path::new("/opt/tool/README.html"));
        assert_eq!(output, Path::new("/opt/tool/README.pdf"));
    }

    #[test]
    fn fixed_filenames() {
        let (input, output) = conversion_paths(Path::new("."));
        assert_eq!(input.file_name().unwrap(), INPUT_FILENAME);
        assert_eq!(output.file_name().unwrap(), OUTPUT_FILENAME);
    }

    #[test]
    fn exe_dir_resolves() {
        // The test binary always has a parent directory.
        assert!(exe_dir().unwrap().is_dir());
    }
}
