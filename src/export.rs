//! Plain-text export of fetched lyrics.

use anyhow::Context;
use std::path::{Path, PathBuf};

/// Write lyrics to `{artist} - {song} lyrics.txt` under `dir`, creating the
/// directory if needed. Returns the path written.
pub fn write_lyrics_file(
    dir: &Path,
    artist: &str,
    song: &str,
    text: &str,
) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))?;

    let path = dir.join(format!("{artist} - {song} lyrics.txt"));
    std::fs::write(&path, text).with_context(|| format!("write {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("verso-export-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_filename_and_content() {
        let dir = temp_dir("filename");
        let _ = std::fs::remove_dir_all(&dir);

        let path = write_lyrics_file(&dir, "Daft Punk", "One More Time", "la\nla\nla").unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "Daft Punk - One More Time lyrics.txt"
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "la\nla\nla");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = temp_dir("mkdir").join("nested");
        let _ = std::fs::remove_dir_all(&dir);

        let path = write_lyrics_file(&dir, "A", "B", "text").unwrap();
        assert!(path.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
