// MCP server: newline-delimited JSON-RPC 2.0 over stdio

use crate::dispatch::Dispatcher;
use crate::protocol::{
    CallToolParams, ClientInfo, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ListToolsResult,
};
use anyhow::{Context, Result};
use futures::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec, LinesCodecError};

/// Longest accepted request line
const MAX_LINE_BYTES: usize = 8 * 1024 * 1024;

pub struct McpServer {
    dispatcher: Dispatcher,
}

impl McpServer {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Serve on the process's stdin/stdout until stdin closes
    pub async fn start(&self) -> Result<()> {
        tracing::info!(
            tools = self.dispatcher.registry().len(),
            "MCP server listening on stdio"
        );
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await?;
        tracing::info!("stdin closed, MCP server stopped");
        Ok(())
    }

    /// Serve requests read from `reader`, writing one response line per request.
    ///
    /// Tool calls run as separate tasks, so responses may be written out of
    /// request order. Returns once the input ends and every in-flight call
    /// has answered.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = FramedRead::new(reader, LinesCodec::new_with_max_length(MAX_LINE_BYTES));
        let mut out = FramedWrite::new(writer, LinesCodec::new());
        let (tx, mut rx) = mpsc::unbounded_channel::<JsonRpcResponse>();

        loop {
            tokio::select! {
                line = lines.next() => match line {
                    Some(Ok(line)) => self.handle_line(&line, &tx),
                    Some(Err(LinesCodecError::MaxLineLengthExceeded)) => {
                        tracing::warn!("request line exceeds {} bytes, discarded", MAX_LINE_BYTES);
                        let _ = tx.send(JsonRpcResponse::error(
                            Value::Null,
                            JsonRpcError::parse_error("request too large"),
                        ));
                    }
                    Some(Err(LinesCodecError::Io(e))) => {
                        return Err(e).context("Failed to read from client");
                    }
                    None => break,
                },
                Some(response) = rx.recv() => write_response(&mut out, &response).await?,
            }
        }

        drop(tx);
        while let Some(response) = rx.recv().await {
            write_response(&mut out, &response).await?;
        }

        Ok(())
    }

    fn handle_line(&self, line: &str, tx: &mpsc::UnboundedSender<JsonRpcResponse>) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        let raw: Value = match serde_json::from_str(line) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "unparseable request");
                let _ = tx.send(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error(e)));
                return;
            }
        };

        let id = raw.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(raw) {
            Ok(request) => request,
            Err(e) => {
                let _ = tx.send(JsonRpcResponse::error(id, JsonRpcError::invalid_request(e)));
                return;
            }
        };

        let Some(id) = request.id else {
            tracing::debug!(method = %request.method, "notification");
            return;
        };

        tracing::debug!(method = %request.method, "request");
        let response = match request.method.as_str() {
            "initialize" => {
                if let Some(client) = request
                    .params
                    .as_ref()
                    .and_then(|p| p.get("clientInfo"))
                    .and_then(|c| serde_json::from_value::<ClientInfo>(c.clone()).ok())
                {
                    tracing::info!(client = %client.name, version = %client.version, "client connected");
                }
                JsonRpcResponse::from_result(id, &InitializeResult::current())
            }
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::from_result(
                id,
                &ListToolsResult {
                    tools: self.dispatcher.list_tools(),
                },
            ),
            "tools/call" => {
                let params = match request.params.map(serde_json::from_value::<CallToolParams>) {
                    Some(Ok(params)) => params,
                    Some(Err(e)) => {
                        let _ = tx.send(JsonRpcResponse::error(
                            id,
                            JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", e)),
                        ));
                        return;
                    }
                    None => {
                        let _ = tx.send(JsonRpcResponse::error(
                            id,
                            JsonRpcError::invalid_params("Missing tools/call params"),
                        ));
                        return;
                    }
                };

                let dispatcher = self.dispatcher.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = dispatcher.call_tool(&params.name, params.arguments).await;
                    let _ = tx.send(JsonRpcResponse::from_result(id, &result));
                });
                return;
            }
            other => JsonRpcResponse::error(id, JsonRpcError::method_not_found(other)),
        };

        let _ = tx.send(response);
    }
}

async fn write_response<W>(out: &mut FramedWrite<W, LinesCodec>, response: &JsonRpcResponse) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let line = serde_json::to_string(response).context("Failed to serialize response")?;
    out.send(line).await.context("Failed to write to client")?;
    Ok(())
}
