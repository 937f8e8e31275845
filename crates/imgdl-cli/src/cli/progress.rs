//! Renders pipeline progress events to stdout.

use imgdl_core::fetch::DownloadOutcome;
use imgdl_core::pipeline::ProgressEvent;
use tokio::sync::mpsc::Receiver;

/// Prints events until the pipeline drops its sender.
pub async fn print_progress(mut rx: Receiver<ProgressEvent>) {
    while let Some(event) = rx.recv().await {
        match event {
            ProgressEvent::Searching { query } => {
                println!("Searching for images: {}", query);
            }
            ProgressEvent::Downloading { total } => {
                println!("Downloading {} images...", total);
            }
            ProgressEvent::Item {
                index,
                total,
                result,
            } => match result.outcome {
                DownloadOutcome::Success => println!(
                    "  [{}/{}] {}",
                    index,
                    total,
                    result.destination_path.display()
                ),
                DownloadOutcome::Failure(err) => {
                    println!("  [{}/{}] failed: {}", index, total, err)
                }
            },
        }
    }
}
