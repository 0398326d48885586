// src/images/store.rs
// =============================================================================
// Writes downloaded images to disk.
//
// How it works:
// 1. Make sure the images directory exists (only checked until it does)
// 2. Copy the response body into images/<filename>.part chunk by chunk
// 3. Rename the .part file over images/<filename> once the body is complete
//
// A download that breaks halfway leaves no file behind, and an earlier
// image with the same name survives it.
//
// Two complete images with the same file name overwrite each other; the
// later one wins. We log a warning when that happens so it doesn't go
// unnoticed.
// =============================================================================

use futures::StreamExt;
use reqwest::Response;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::error::CrawlError;

/// Owns the output directory for one crawl.
#[derive(Debug)]
pub struct ImageStore {
    dir: PathBuf,
    dir_ready: bool,
    written: HashSet<String>,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            dir_ready: false,
            written: HashSet::new(),
        }
    }

    // Streams an image response into <dir>/<filename>
    //
    // Parameters:
    //   url: where the image came from (only used for error reporting)
    //   filename: already sanitized file name
    //   response: successful response whose body is the image
    //
    // Returns: number of bytes written
    pub async fn save(
        &mut self,
        url: &str,
        filename: &str,
        response: Response,
    ) -> Result<u64, CrawlError> {
        let write_failure = |reason: String| CrawlError::ImageWriteFailure {
            url: url.to_string(),
            reason,
        };

        self.ensure_dir().await.map_err(|e| {
            write_failure(format!("cannot create {}: {}", self.dir.display(), e))
        })?;

        let path = self.dir.join(filename);
        let part = self.dir.join(format!("{}.part", filename));

        let bytes = match stream_to_file(&part, response).await {
            Ok(bytes) => bytes,
            Err(reason) => {
                // Leave any earlier image with this name untouched
                let _ = fs::remove_file(&part).await;
                return Err(write_failure(reason));
            }
        };

        if let Err(e) = fs::rename(&part, &path).await {
            let _ = fs::remove_file(&part).await;
            return Err(write_failure(format!(
                "cannot move {} to {}: {}",
                part.display(),
                path.display(),
                e
            )));
        }

        if !self.written.insert(filename.to_string()) {
            warn!(file = %path.display(), url, "overwrote image with the same file name");
        }

        debug!(file = %path.display(), bytes, "image written");
        Ok(bytes)
    }

    async fn ensure_dir(&mut self) -> std::io::Result<()> {
        if !self.dir_ready {
            fs::create_dir_all(&self.dir).await?;
            self.dir_ready = true;
        }
        Ok(())
    }
}

// Copies the response body into `path` chunk by chunk
async fn stream_to_file(path: &Path, response: Response) -> Result<u64, String> {
    let mut file = File::create(path)
        .await
        .map_err(|e| format!("cannot create {}: {}", path.display(), e))?;

    let mut stream = response.bytes_stream();
    let mut bytes = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| format!("body stream failed: {}", e))?;
        file.write_all(&chunk)
            .await
            .map_err(|e| format!("write to {} failed: {}", path.display(), e))?;
        bytes += chunk.len() as u64;
    }

    file.flush()
        .await
        .map_err(|e| format!("write to {} failed: {}", path.display(), e))?;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    async fn image_response(
        server: &mut Server,
        path: &str,
        body: &[u8],
    ) -> (mockito::Mock, Response) {
        let mock = server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "image/png")
            .with_body(body)
            .create_async()
            .await;
        let response = reqwest::get(format!("{}{}", server.url(), path)).await.unwrap();
        (mock, response)
    }

    #[tokio::test]
    async fn test_save_creates_directory_and_writes_bytes() {
        let mut server = Server::new_async().await;
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("images");
        let mut store = ImageStore::new(&dir);

        let (_m, response) = image_response(&mut server, "/a.png", b"PNGDATA").await;
        let bytes = store.save("http://x/a.png", "a.png", response).await.unwrap();

        assert_eq!(bytes, 7);
        assert_eq!(std::fs::read(dir.join("a.png")).unwrap(), b"PNGDATA");
    }

    #[tokio::test]
    async fn test_same_name_overwrites() {
        let mut server = Server::new_async().await;
        let tmp = tempfile::tempdir().unwrap();
        let mut store = ImageStore::new(tmp.path());

        let (_m1, first) = image_response(&mut server, "/one/pic.png", b"first image").await;
        store.save("http://x/one/pic.png", "pic.png", first).await.unwrap();

        let (_m2, second) = image_response(&mut server, "/two/pic.png", b"second").await;
        store.save("http://x/two/pic.png", "pic.png", second).await.unwrap();

        assert_eq!(std::fs::read(tmp.path().join("pic.png")).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_unwritable_directory_is_a_write_failure() {
        let mut server = Server::new_async().await;
        let tmp = tempfile::tempdir().unwrap();
        // A regular file where the directory should be
        let blocker = tmp.path().join("images");
        std::fs::write(&blocker, b"not a dir").unwrap();
        let mut store = ImageStore::new(&blocker);

        let (_m, response) = image_response(&mut server, "/a.png", b"x").await;
        let err = store.save("http://x/a.png", "a.png", response).await.unwrap_err();

        assert!(matches!(err, CrawlError::ImageWriteFailure { .. }));
    }

    // Serves one response that promises 100 bytes but sends 3, then hangs up
    async fn truncated_response() -> Response {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nabc")
                .await
                .unwrap();
            socket.shutdown().await.unwrap();
        });

        reqwest::get(format!("http://{}/pic.png", addr)).await.unwrap()
    }

    #[tokio::test]
    async fn test_broken_body_leaves_no_file() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = ImageStore::new(tmp.path());

        let response = truncated_response().await;
        let err = store.save("http://x/pic.png", "pic.png", response).await.unwrap_err();

        assert!(matches!(err, CrawlError::ImageWriteFailure { .. }));
        assert!(!tmp.path().join("pic.png").exists());
        assert!(!tmp.path().join("pic.png.part").exists());
    }

    #[tokio::test]
    async fn test_broken_body_keeps_earlier_image() {
        let mut server = Server::new_async().await;
        let tmp = tempfile::tempdir().unwrap();
        let mut store = ImageStore::new(tmp.path());

        let (_m, good) = image_response(&mut server, "/one/pic.png", b"good image").await;
        store.save("http://x/one/pic.png", "pic.png", good).await.unwrap();

        let response = truncated_response().await;
        let err = store.save("http://x/two/pic.png", "pic.png", response).await.unwrap_err();

        assert!(matches!(err, CrawlError::ImageWriteFailure { .. }));
        assert_eq!(std::fs::read(tmp.path().join("pic.png")).unwrap(), b"good image");
        assert!(!tmp.path().join("pic.png.part").exists());
    }
}
