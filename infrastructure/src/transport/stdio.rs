//! Newline-delimited JSON server over a byte stream (stdin/stdout).
//!
//! Each input line is a [`RequestEnvelope`]; each output line is the
//! matching [`ResponseEnvelope`]. Requests run concurrently, so responses
//! may come back out of order and carry the request `id` for matching.

use crate::transport::bus::MessageBus;
use crate::transport::error::{Result, TransportError};
use crate::transport::protocol::{ContextId, RequestEnvelope, Response, ResponseEnvelope};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Serve requests from `reader` until EOF, writing responses to `writer`.
///
/// Returns the number of request lines read. Every line gets exactly one
/// response line, including lines that fail to parse.
pub async fn serve_lines<R, W>(bus: Arc<MessageBus>, reader: R, writer: W) -> Result<usize>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<ResponseEnvelope>();
    let writer_task = tokio::spawn(async move {
        let mut writer = BufWriter::new(writer);
        while let Some(envelope) = out_rx.recv().await {
            let line = serde_json::to_string(&envelope)?;
            writer.write_all(line.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
        Ok::<(), TransportError>(())
    });

    let mut lines = BufReader::new(reader).lines();
    let mut in_flight = JoinSet::new();
    let mut served = 0;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        served += 1;

        match serde_json::from_str::<RequestEnvelope>(line) {
            Ok(envelope) => {
                let bus = Arc::clone(&bus);
                let out = out_tx.clone();
                in_flight.spawn(async move {
                    let to = envelope.to.unwrap_or(ContextId::Coordinator);
                    let response = match bus.send(to, envelope.request).await {
                        Ok(response) => response,
                        Err(e) => {
                            warn!("Request {:?} failed: {}", envelope.id, e);
                            Response::failure(e.to_string())
                        }
                    };
                    let _ = out.send(ResponseEnvelope {
                        id: envelope.id,
                        response,
                    });
                });
            }
            Err(e) => {
                warn!("Invalid request line: {}", e);
                let _ = out_tx.send(ResponseEnvelope {
                    id: salvage_id(line),
                    response: Response::failure(format!("Invalid request: {}", e)),
                });
            }
        }
    }

    debug!("Input closed, waiting for {} in-flight requests", in_flight.len());
    while in_flight.join_next().await.is_some() {}
    drop(out_tx);
    writer_task
        .await
        .map_err(|_| TransportError::ChannelClosed)??;

    info!("Served {} requests", served);
    Ok(served)
}

/// Best-effort `id` from a line that is JSON but not a valid envelope
fn salvage_id(line: &str) -> Option<u64> {
    serde_json::from_str::<serde_json::Value>(line)
        .ok()?
        .get("id")?
        .as_u64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::endpoint::spawn_endpoint;
    use crate::transport::handlers::CoordinatorHandler;
    use risklens_application::{AnalysisOrchestrator, AnalysisSettings, CapabilityRegistry};
    use serde_json::Value;
    use std::collections::HashMap;
    use tokio::io::AsyncReadExt;
    use tokio_util::sync::CancellationToken;

    #[tokio::test]
    async fn every_line_gets_one_response() {
        let bus = MessageBus::new();
        let cancel = CancellationToken::new();
        let orchestrator = AnalysisOrchestrator::new(
            Arc::new(CapabilityRegistry::new()),
            AnalysisSettings::default(),
        );
        let endpoint = spawn_endpoint(
            &bus,
            ContextId::Coordinator,
            Arc::new(CoordinatorHandler::new(Arc::new(orchestrator))),
            cancel.clone(),
        )
        .unwrap();

        let input = concat!(
            "{\"id\":1,\"request\":{\"action\":\"testAvailability\"}}\n",
            "\n",
            "{\"id\":2,\"request\":{\"action\":\"openPanel\"}}\n",
            "{\"id\":3,\"to\":\"page\",\"request\":{\"action\":\"getSelectedText\"}}\n",
            "{\"id\":4,\"request\":{\"action\":\"analyzeText\",\"text\":\"Fees apply.\"}}\n",
        );
        let (client, server_out) = tokio::io::duplex(1 << 16);

        let served = serve_lines(bus, input.as_bytes(), server_out).await.unwrap();
        assert_eq!(served, 4);

        let mut output = String::new();
        let mut client = client;
        client.read_to_string(&mut output).await.unwrap();
        let by_id: HashMap<u64, Value> = output
            .lines()
            .map(|l| serde_json::from_str::<Value>(l).unwrap())
            .map(|v| (v["id"].as_u64().unwrap(), v["response"].clone()))
            .collect();

        assert_eq!(by_id.len(), 4);
        assert_eq!(by_id[&1]["available"], false);
        assert_eq!(by_id[&2]["success"], false);
        assert!(by_id[&2]["error"].as_str().unwrap().starts_with("Invalid request"));
        assert!(by_id[&3]["error"].as_str().unwrap().contains("no page listener"));
        assert_eq!(by_id[&4]["analysis"]["dangerPoints"][0]["title"], "Financial Risk");

        cancel.cancel();
        endpoint.await.unwrap();
    }

    #[test]
    fn salvage_id_reads_numeric_ids_only() {
        assert_eq!(salvage_id("{\"id\": 9, \"request\": 1}"), Some(9));
        assert_eq!(salvage_id("{\"id\": \"x\"}"), None);
        assert_eq!(salvage_id("not json"), None);
    }
}
