use std::{convert::Infallible, sync::Arc, time::Duration};

use axum::{
    extract::State,
    response::sse::{Event as SseEvent, KeepAlive, Sse},
    routing::get,
    Router,
};
use futures::stream::{self, StreamExt};
use futures_core::stream::Stream;
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};

use crate::{
    events::{ServerEvent, VIBES_UPDATED},
    main_lib::AppState,
};

fn to_sse(evt: ServerEvent) -> Option<SseEvent> {
    let sse_event = SseEvent::default().event(evt.name);
    match evt.payload {
        Some(payload) => match sse_event.json_data(payload) {
            Ok(ev) => Some(ev),
            Err(err) => {
                tracing::error!("Failed to serialize SSE payload for {}: {}", evt.name, err);
                None
            }
        },
        None => Some(sse_event.data("null")),
    }
}

/// Current snapshot for a newly connected viewer.
fn initial_event(state: &AppState) -> Option<ServerEvent> {
    let snapshot = match state.vote_service.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::warn!("Failed to load initial vibe snapshot: {}", e);
            return None;
        }
    };
    match serde_json::to_value(&snapshot) {
        Ok(payload) => Some(ServerEvent::with_payload(VIBES_UPDATED, payload)),
        Err(e) => {
            tracing::error!("Failed to serialize vibe snapshot: {}", e);
            None
        }
    }
}

async fn stream_events(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    // Subscribe before reading so no change between the two is lost.
    let receiver = BroadcastStream::new(state.event_bus.subscribe());
    let initial = stream::iter(initial_event(&state));

    let updates = receiver.filter_map(|event| async move {
        match event {
            Ok(evt) => Some(evt),
            // The next snapshot is complete, so skipped ones need no replay.
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                tracing::debug!("SSE client lagged, skipped {} event(s)", skipped);
                None
            }
        }
    });

    let stream = initial
        .chain(updates)
        .filter_map(|evt| async move { to_sse(evt).map(Ok) });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/events/stream", get(stream_events))
}
