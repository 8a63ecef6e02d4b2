//! Integration tests for the unix-socket helper transport, end to end
//! through the encryption bridge, against an in-process helper double.

#![cfg(unix)]
#![allow(clippy::expect_used)]

use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UnixListener;

use bastion_client::application::ports::HelperChannel;
use bastion_client::application::services::encryption::{check_encryptable, encrypt_string};
use bastion_client::domain::error::BridgeFault;
use bastion_client::infra::helper::UnixHelperChannel;
use bastion_common::HelperOp;

fn socket_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("helper.sock")
}

/// Bind a one-shot helper double: read one request line, send `reply`
/// verbatim (no newline appended when empty, to simulate a silent close).
fn spawn_helper(listener: UnixListener, reply: &'static str) -> tokio::task::JoinHandle<String> {
    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        let (read_half, mut write_half) = stream.into_split();

        let mut request_line = String::new();
        BufReader::new(read_half)
            .read_line(&mut request_line)
            .await
            .expect("read request");

        if !reply.is_empty() {
            write_half.write_all(reply.as_bytes()).await.expect("write reply");
        }
        write_half.shutdown().await.expect("shutdown");
        request_line
    })
}

// ── Clean round trips ─────────────────────────────────────────────────────────

#[tokio::test]
async fn encrypt_round_trip_carries_the_documented_request_shape() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = socket_path(&dir);
    let listener = UnixListener::bind(&path).expect("bind");
    let helper = spawn_helper(listener, "[null, \"ENCRYPTED\"]\n");

    let out = encrypt_string(&UnixHelperChannel::new(&path), "secret")
        .await
        .expect("encrypt");
    assert_eq!(out, "ENCRYPTED");

    let request_line = helper.await.expect("helper task");
    let request: serde_json::Value =
        serde_json::from_str(&request_line).expect("request is one JSON line");
    assert_eq!(request["topic"], "processing");
    assert_eq!(request["op"], "encrypt");
    assert_eq!(request["payload"], "secret");
}

#[tokio::test]
async fn capability_round_trip_resolves_bool() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = socket_path(&dir);
    let listener = UnixListener::bind(&path).expect("bind");
    let helper = spawn_helper(listener, "[null, true]\n");

    assert!(check_encryptable(&UnixHelperChannel::new(&path)).await.expect("check"));
    let request_line = helper.await.expect("helper task");
    assert!(!request_line.contains("payload"));
}

// ── Failure origins ───────────────────────────────────────────────────────────

#[tokio::test]
async fn a_missing_socket_is_a_request_fault() {
    let dir = tempfile::tempdir().expect("tempdir");
    let channel = UnixHelperChannel::new(socket_path(&dir));

    let err = encrypt_string(&channel, "secret")
        .await
        .expect_err("no socket must reject");
    assert_eq!(err.bridge_fault(), Some(BridgeFault::Request));
}

#[tokio::test]
async fn a_silent_close_is_an_empty_fault() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = socket_path(&dir);
    let listener = UnixListener::bind(&path).expect("bind");
    let helper = spawn_helper(listener, "");

    let err = encrypt_string(&UnixHelperChannel::new(&path), "secret")
        .await
        .expect_err("silent close must reject");
    assert_eq!(err.bridge_fault(), Some(BridgeFault::Empty));
    helper.await.expect("helper task");
}

#[tokio::test]
async fn an_unparseable_reply_is_a_transport_fault() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = socket_path(&dir);
    let listener = UnixListener::bind(&path).expect("bind");
    let helper = spawn_helper(listener, "not json at all\n");

    let err = encrypt_string(&UnixHelperChannel::new(&path), "secret")
        .await
        .expect_err("garbage reply must reject");
    assert_eq!(err.bridge_fault(), Some(BridgeFault::Transport));
    helper.await.expect("helper task");
}

#[tokio::test]
async fn a_helper_reported_error_is_a_remote_fault() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = socket_path(&dir);
    let listener = UnixListener::bind(&path).expect("bind");
    let helper = spawn_helper(listener, "[\"keychain locked\", null]\n");

    let err = encrypt_string(&UnixHelperChannel::new(&path), "secret")
        .await
        .expect_err("helper error must reject");
    assert_eq!(err.bridge_fault(), Some(BridgeFault::Remote));
    assert!(err.to_string().contains("keychain locked"));
    helper.await.expect("helper task");
}

// ── Port-level contract ───────────────────────────────────────────────────────

#[tokio::test]
async fn invoke_returns_the_raw_reply_tuple() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = socket_path(&dir);
    let listener = UnixListener::bind(&path).expect("bind");
    let helper = spawn_helper(listener, "[null, \"plain\"]\n");

    let reply = UnixHelperChannel::new(&path)
        .invoke(HelperOp::Decrypt, Some("blob".to_string()))
        .await
        .expect("invoke")
        .expect("reply present");

    assert_eq!(reply.error(), None);
    assert_eq!(reply.value().as_str(), Some("plain"));
    helper.await.expect("helper task");
}
