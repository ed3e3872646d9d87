use std::{path::Path, sync::Arc, time::Duration};

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use notify_debouncer_full::{
    new_debouncer, DebouncedEvent,
    notify::{Error as NotifyError, RecursiveMode, Watcher},
};
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, error, info};

use crate::content_loader::reload_content;
use crate::state::{AppState, RefreshBroadcaster};

const DEBOUNCE: Duration = Duration::from_millis(200);

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(tx): State<RefreshBroadcaster>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, tx))
}

async fn handle_socket(mut socket: WebSocket, tx: RefreshBroadcaster) {
    let mut rx = tx.subscribe();

    // Wait for a reload signal, tell the client, then let the socket close.
    if rx.recv().await.is_ok() && socket.send(Message::Text("reload".into())).await.is_err() {
        debug!("Client disconnected before reload message could be sent");
    }
}

/// Emacs lock files (`.#name`) and backups (`name~`).
fn is_temp_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|s| s.starts_with(".#") || s.ends_with('~'))
}

fn is_relevant(event: &DebouncedEvent) -> bool {
    let kind = &event.event.kind;
    (kind.is_modify() || kind.is_create() || kind.is_remove())
        && !event.event.paths.iter().any(|path| is_temp_file(path))
}

/// Returns false once the reload loop is gone.
fn queue_reload(tx: &mpsc::Sender<()>) -> bool {
    match tx.try_send(()) {
        // A reload is already queued.
        Ok(()) | Err(TrySendError::Full(())) => true,
        Err(TrySendError::Closed(())) => {
            error!("Reload channel closed, dropping file change");
            false
        }
    }
}

pub fn start_content_watcher(tx: RefreshBroadcaster, app_state: Arc<AppState>) {
    info!("Starting content watcher for hot-reload...");
    tokio::spawn(async move {
        let (watcher_tx, mut watcher_rx) = mpsc::channel(1);

        let debouncer = new_debouncer(DEBOUNCE, None, move |res: Result<Vec<DebouncedEvent>, Vec<NotifyError>>| {
            match res {
                Ok(events) => {
                    let changed: Vec<_> = events
                        .iter()
                        .filter(|event| is_relevant(event))
                        .flat_map(|event| &event.event.paths)
                        .map(|path| path.display().to_string())
                        .collect();
                    if !changed.is_empty() {
                        debug!("Relevant file change detected: {:?}", changed);
                        queue_reload(&watcher_tx);
                    }
                }
                Err(errors) => {
                    for e in errors {
                        error!("Watcher error: {}", e);
                    }
                }
            }
        });

        let mut debouncer = match debouncer {
            Ok(debouncer) => debouncer,
            Err(e) => {
                error!("Failed to create debouncer: {}", e);
                return;
            }
        };

        if let Err(e) = debouncer
            .watcher()
            .watch(&app_state.content_dir, RecursiveMode::Recursive)
        {
            error!(
                "Failed to start watching {}: {}",
                app_state.content_dir.display(),
                e
            );
            return;
        }

        while watcher_rx.recv().await.is_some() {
            info!("Content change detected, reloading content and sending signal...");

            reload_content(&app_state).await;

            if let Err(e) = tx.send(()) {
                debug!("No clients to notify of reload: {}", e);
            }
        }
    });
}
