use std::io;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Opens `url` once the listener reports ready by sending it through
/// `ready`. If the sender is dropped first (bind failed, shutdown) nothing
/// is opened. Opener failures are logged and never propagated.
pub fn open_browser_when_ready<F>(ready: oneshot::Receiver<String>, open: F) -> JoinHandle<()>
where
    F: FnOnce(&str) -> io::Result<()> + Send + 'static,
{
    tokio::spawn(async move {
        let Ok(url) = ready.await else {
            tracing::debug!("server never became ready; skipping browser launch");
            return;
        };
        let target = url.clone();
        match tokio::task::spawn_blocking(move || open(&target)).await {
            Ok(Ok(())) => tracing::info!(url = %url, "opened browser"),
            Ok(Err(err)) => tracing::warn!(url = %url, error = %err, "failed to open browser"),
            Err(err) => tracing::warn!(url = %url, error = %err, "browser launch task failed"),
        }
    })
}

pub fn open_in_default_browser(url: &str) -> io::Result<()> {
    webbrowser::open(url)
}
