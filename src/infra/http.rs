// ============================================================
// Layer 6 — HTTP Downloader
// ============================================================
// Streams a single GET response body straight to disk.
//
//   - the destination's parent directory is created first
//   - the body is copied through a buffered writer, so large
//     archives never sit in memory
//   - any status >= 400 or transport failure becomes
//     LoaderError::Transport; there is no retry and a partial
//     file is not cleaned up
//
// Reference: ureq documentation (Body::into_reader)

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::domain::{errors::LoaderError, traits::Downloader};

/// The production `Downloader`, backed by `ureq`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpDownloader;

impl HttpDownloader {
    pub fn new() -> Self {
        Self
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, url: &str, dest: &Path) -> Result<(), LoaderError> {
        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let transport = |reason: String| LoaderError::Transport {
            url: url.to_string(),
            reason,
        };

        let response = ureq::get(url)
            .call()
            .map_err(|err| transport(err.to_string()))?;

        let mut reader = response.into_body().into_reader();
        let mut writer = BufWriter::new(File::create(dest)?);
        let bytes = io::copy(&mut reader, &mut writer)
            .map_err(|err| transport(format!("failed streaming body: {err}")))?;
        writer.flush()?;

        tracing::debug!("Wrote {} bytes to '{}'", bytes, dest.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_host_is_transport_error() {
        let dir  = tempfile::tempdir().unwrap();
        let dest = dir.path().join("nested").join("file.csv");
        // Port 9 on localhost (discard) is not an HTTP server
        let err  = HttpDownloader::new()
            .download("http://127.0.0.1:9/file.csv", &dest)
            .unwrap_err();
        assert!(matches!(err, LoaderError::Transport { .. }));
        // The parent directory is created before the request goes out
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_invalid_url_is_transport_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = HttpDownloader::new()
            .download("", &dir.path().join("x"))
            .unwrap_err();
        assert!(matches!(err, LoaderError::Transport { .. }));
    }
}
