use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use futures::{Sink, SinkExt, Stream, StreamExt};
use log::*;
use std::fmt::Display;

/// GET upgrade to a WebSocket that acknowledges every text frame it receives.
pub async fn echo(ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(handle_socket)
}

async fn handle_socket(socket: WebSocket) {
    debug!("Echo channel opened");

    let (outbound, inbound) = socket.split();
    if let Err(e) = echo_loop(inbound, outbound).await {
        warn!("Echo channel send failed: {e}");
    }

    debug!("Echo channel closed");
}

fn echo_reply(text: &str) -> String {
    format!("Message text was: {text}")
}

/// Answers each inbound text frame with one text frame until the peer closes
/// the connection or the stream ends.
async fn echo_loop<St, Si, E>(mut inbound: St, mut outbound: Si) -> Result<(), Si::Error>
where
    St: Stream<Item = Result<Message, E>> + Unpin,
    E: Display,
    Si: Sink<Message> + Unpin,
    Si::Error: Display,
{
    while let Some(frame) = inbound.next().await {
        match frame {
            Ok(Message::Text(text)) => {
                outbound
                    .send(Message::Text(echo_reply(text.as_str()).into()))
                    .await?;
            }
            Ok(Message::Close(_)) => break,
            // Pings are answered by axum; binary and pong frames are ignored.
            Ok(_) => {}
            Err(e) => {
                debug!("Echo channel receive error: {e}");
                break;
            }
        }
    }

    Ok(())
}
