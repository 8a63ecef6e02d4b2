//! Privileged helper transport — unix-socket JSON adapter for the
//! `HelperChannel` port.
//!
//! One connection per round trip: write a single request line, read a
//! single reply line. A connection that closes cleanly before any reply
//! is "no reply", not a transport error.

use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UnixStream;
use tracing::debug;

use bastion_common::{HelperOp, HelperReply, HelperRequest};

use crate::application::ports::HelperChannel;
use crate::domain::error::ChannelError;

/// Connects to the helper's unix socket for each request.
///
/// The socket path is injected by the caller; this layer owns no
/// configuration.
pub struct UnixHelperChannel {
    socket_path: PathBuf,
}

impl UnixHelperChannel {
    #[must_use]
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
        }
    }
}

impl HelperChannel for UnixHelperChannel {
    async fn invoke(
        &self,
        op: HelperOp,
        payload: Option<String>,
    ) -> Result<Option<HelperReply>, ChannelError> {
        let request = HelperRequest::new(op, payload);
        let mut line = serde_json::to_string(&request)
            .map_err(|e| ChannelError::Send(e.to_string()))?;
        line.push('\n');

        let stream = UnixStream::connect(&self.socket_path).await.map_err(|e| {
            ChannelError::Send(format!("{}: {e}", self.socket_path.display()))
        })?;
        let (reader, mut writer) = stream.into_split();

        writer
            .write_all(line.as_bytes())
            .await
            .map_err(|e| ChannelError::Send(e.to_string()))?;
        writer
            .shutdown()
            .await
            .map_err(|e| ChannelError::Send(e.to_string()))?;

        let mut reply_line = String::new();
        let bytes = BufReader::new(reader)
            .read_line(&mut reply_line)
            .await
            .map_err(|e| ChannelError::Recv(e.to_string()))?;
        if bytes == 0 {
            return Ok(None);
        }

        debug!(op = %op, "helper reply received");
        serde_json::from_str(&reply_line)
            .map(Some)
            .map_err(|e| ChannelError::Recv(e.to_string()))
    }
}
