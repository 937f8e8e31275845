//! Progress events sent from the pipeline to a printer.

use crate::fetch::DownloadResult;
use tokio::sync::mpsc::Sender;

/// Stage and per-item notifications, in the order the pipeline emits them:
/// `Searching`, then `Downloading` (only if something was found), then one
/// `Item` per candidate.
#[derive(Debug)]
pub enum ProgressEvent {
    Searching { query: String },
    Downloading { total: usize },
    Item {
        /// 1-based position in the candidate list.
        index: usize,
        total: usize,
        result: DownloadResult,
    },
}

/// Sends `event` if a receiver is attached. Called from the blocking pipeline
/// thread; a dropped receiver is ignored.
pub(crate) fn emit(progress: Option<&Sender<ProgressEvent>>, event: ProgressEvent) {
    if let Some(tx) = progress {
        if tx.blocking_send(event).is_err() {
            tracing::debug!("progress receiver dropped");
        }
    }
}
