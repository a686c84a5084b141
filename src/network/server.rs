use std::net::SocketAddr;
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{accept_async, tungstenite::Message};
use tracing::{error, info, warn};

use super::session::{Session, SharedDataset};
use crate::config::Settings;
use crate::protocol::{ClientMessage, ServerMessage};

/// Wire encoding of a frame. Replies mirror the encoding of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Binary frames, msgpack with named fields.
    MessagePack,
    /// Text frames.
    Json,
}

/// Decodes a client frame. Control frames yield `None`.
pub fn decode_frame(msg: &Message) -> Option<(Encoding, Result<ClientMessage, String>)> {
    match msg {
        Message::Binary(data) => Some((
            Encoding::MessagePack,
            rmp_serde::from_slice::<ClientMessage>(data)
                .map_err(|e| format!("Failed to decode ClientMessage: {}", e)),
        )),
        Message::Text(text) => Some((
            Encoding::Json,
            serde_json::from_str::<ClientMessage>(text)
                .map_err(|e| format!("Failed to decode ClientMessage: {}", e)),
        )),
        _ => None,
    }
}

pub fn encode_frame(msg: &ServerMessage, encoding: Encoding) -> Result<Message, String> {
    match encoding {
        Encoding::MessagePack => rmp_serde::to_vec_named(msg)
            .map(|bytes| Message::Binary(bytes.into()))
            .map_err(|e| format!("Failed to serialize ServerMessage: {}", e)),
        Encoding::Json => serde_json::to_string(msg)
            .map(|text| Message::Text(text.into()))
            .map_err(|e| format!("Failed to serialize ServerMessage: {}", e)),
    }
}

/// Accepts dashboard clients forever. Each connection gets its own
/// `Session` task; only binding can fail.
pub async fn run(addr: &str, dataset: SharedDataset, settings: Arc<Settings>) -> Result<(), String> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;

    info!("Dashboard server listening on ws://{}", addr);

    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                error!("Dashboard accept error: {}", e);
                continue;
            }
        };
        info!("New connection from: {}", peer);

        let session = Session::new(dataset.clone(), settings.clone());
        tokio::spawn(serve_client(stream, peer, session));
    }
}

async fn serve_client(stream: TcpStream, peer: SocketAddr, mut session: Session) {
    let ws_stream = match accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            error!("WebSocket handshake failed: {}", e);
            return;
        }
    };
    let (mut write, mut read) = ws_stream.split();

    let initial = session.view().await;
    match encode_frame(&initial, Encoding::MessagePack) {
        Ok(frame) => {
            if let Err(e) = write.send(frame).await {
                error!("Failed to send initial view to {}: {}", peer, e);
                return;
            }
        }
        Err(e) => error!("{}", e),
    }

    while let Some(result) = read.next().await {
        let msg = match result {
            Ok(msg) => msg,
            Err(e) => {
                error!("WebSocket read error from {}: {}", peer, e);
                break;
            }
        };
        if msg.is_close() {
            break;
        }
        let Some((encoding, decoded)) = decode_frame(&msg) else {
            continue;
        };

        let reply = match decoded {
            Ok(client_msg) => session.handle(client_msg).await,
            Err(message) => {
                warn!("{} (from {})", message, peer);
                ServerMessage::Error { message }
            }
        };

        match encode_frame(&reply, encoding) {
            Ok(frame) => {
                if let Err(e) = write.send(frame).await {
                    error!("Failed to send WebSocket message: {}", e);
                    break;
                }
            }
            Err(e) => error!("{}", e),
        }
    }

    info!("Client {} disconnected", peer);
}
