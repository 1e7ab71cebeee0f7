use crate::api;
use futures::StreamExt;
use gloo_net::eventsource::futures::EventSource;
use shared::{ApiError, Endpoint, TrainEvent};

/// Follows the training log stream until its exit sentinel or an error.
///
/// Each message is handed to `on_event` as it arrives. The event source is
/// closed before returning on every path; the browser would otherwise keep
/// reconnecting and restart the training script.
pub async fn stream_training<F>(mut on_event: F) -> Result<(), ApiError>
where
    F: FnMut(TrainEvent),
{
    let url = api::url(Endpoint::TrainStream);
    let mut source = EventSource::new(&url).map_err(|e| {
        log::warn!("Could not open {}: {:?}", url, e);
        ApiError::Network(format!("{:?}", e))
    })?;
    let mut messages = match source.subscribe("message") {
        Ok(messages) => messages,
        Err(e) => {
            source.close();
            return Err(ApiError::Network(format!("{:?}", e)));
        }
    };
    log::info!("Training stream opened");

    let outcome = loop {
        match messages.next().await {
            Some(Ok((_, message))) => {
                let data = message.data().as_string().unwrap_or_default();
                let event = TrainEvent::parse(&data);
                let terminal = event.is_terminal();
                on_event(event);
                if terminal {
                    break Ok(());
                }
            }
            Some(Err(e)) => {
                gloo_console::error!(format!("Training stream error: {:?}", e));
                break Err(ApiError::Network(format!("{:?}", e)));
            }
            None => break Err(ApiError::Network("training stream ended".to_string())),
        }
    };

    drop(messages);
    source.close();
    log::info!("Training stream closed");
    outcome
}
