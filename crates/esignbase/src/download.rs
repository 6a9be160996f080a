//! Streamed document download
//!
//! A `DocumentDownload` owns the HTTP response of a successful download
//! request and hands out body chunks in order. It is finite and cannot be
//! restarted: once the body ends, a read fails, or `close` is called, the
//! connection is released and no further chunks are produced.

use bytes::{Bytes, BytesMut};
use futures_util::Stream;
use tracing::debug;

use crate::error::{Error, Result};

pub struct DocumentDownload {
    document_id: String,
    response: Option<reqwest::Response>,
    bytes_read: u64,
}

impl DocumentDownload {
    pub(crate) fn new(document_id: impl Into<String>, response: reqwest::Response) -> Self {
        Self {
            document_id: document_id.into(),
            response: Some(response),
            bytes_read: 0,
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    /// Bytes handed out so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// True once the body is exhausted, a read failed, or the download was closed.
    pub fn is_finished(&self) -> bool {
        self.response.is_none()
    }

    /// `Content-Length` announced by the server, if any.
    pub fn content_length(&self) -> Option<u64> {
        self.response.as_ref().and_then(reqwest::Response::content_length)
    }

    /// Next body chunk, or `None` when the download is finished.
    ///
    /// A read error is returned once; afterwards the download reports finished.
    pub async fn next_chunk(&mut self) -> Result<Option<Bytes>> {
        let Some(response) = self.response.as_mut() else {
            return Ok(None);
        };
        match response.chunk().await {
            Ok(Some(chunk)) => {
                self.bytes_read += chunk.len() as u64;
                Ok(Some(chunk))
            }
            Ok(None) => {
                self.response = None;
                debug!(document_id = %self.document_id, bytes = self.bytes_read, "download complete");
                Ok(None)
            }
            Err(e) => {
                self.response = None;
                Err(Error::Http(format!(
                    "reading document {} failed: {e}",
                    self.document_id
                )))
            }
        }
    }

    /// Release the connection without reading the rest of the body.
    pub fn close(mut self) {
        if self.response.take().is_some() {
            debug!(document_id = %self.document_id, bytes = self.bytes_read, "download closed early");
        }
    }

    /// Drain the remaining body into one buffer.
    pub async fn collect_bytes(mut self) -> Result<Bytes> {
        let mut buffer = BytesMut::new();
        while let Some(chunk) = self.next_chunk().await? {
            buffer.extend_from_slice(&chunk);
        }
        Ok(buffer.freeze())
    }

    /// Adapt into a `Stream` of chunks. Ends after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Bytes>> + Send {
        futures_util::stream::unfold(Some(self), |state| async move {
            let mut download = state?;
            match download.next_chunk().await {
                Ok(Some(chunk)) => Some((Ok(chunk), Some(download))),
                Ok(None) => None,
                Err(e) => Some((Err(e), None)),
            }
        })
    }
}

impl std::fmt::Debug for DocumentDownload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentDownload")
            .field("document_id", &self.document_id)
            .field("bytes_read", &self.bytes_read)
            .field("finished", &self.is_finished())
            .finish()
    }
}
