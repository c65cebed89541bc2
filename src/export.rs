//! CV export.
//!
//! The CV ships inside the binary. "Download CV" opens a native save dialog
//! starting in the user's download directory and writes the bytes wherever
//! it points. Cancelling the dialog is a no-op.

use std::io;
use std::path::{Path, PathBuf};

pub const CV_BYTES: &[u8] = include_bytes!("../assets/cv.pdf");
pub const CV_FILE_NAME: &str = "Varith_Pheng_CV.pdf";

pub fn write_cv(dest: &Path) -> io::Result<()> {
    std::fs::write(dest, CV_BYTES)
}

/// Ask where to save and write the CV there. Returns the chosen path, or
/// `None` when the dialog was cancelled.
pub async fn save_cv_via_dialog() -> io::Result<Option<PathBuf>> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_file_name(CV_FILE_NAME)
        .add_filter("PDF", &["pdf"]);
    if let Some(downloads) = dirs::download_dir() {
        dialog = dialog.set_directory(downloads);
    }

    match dialog.save_file().await {
        Some(handle) => {
            let path = handle.path().to_path_buf();
            write_cv(&path)?;
            Ok(Some(path))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_cv_is_a_pdf() {
        assert!(CV_BYTES.starts_with(b"%PDF"));
        assert!(CV_FILE_NAME.ends_with(".pdf"));
    }

    #[test]
    fn write_cv_copies_every_byte() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join(CV_FILE_NAME);

        write_cv(&dest).unwrap();

        let written = std::fs::read(&dest).unwrap();
        assert_eq!(written, CV_BYTES);
    }
}
