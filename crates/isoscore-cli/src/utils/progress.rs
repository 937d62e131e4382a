use indicatif::{ProgressBar, ProgressState, ProgressStyle};
use isoscore::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0).with_message("Initializing...");
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    /// A handler that never draws, for quiet runs.
    pub fn hidden() -> Self {
        let handler = Self::new();
        if let Ok(pb) = handler.pb.lock() {
            pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
        }
        handler
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::ScanStart { name, total_pairs } => {
                    pb_guard.reset();
                    pb_guard.set_length(total_pairs);
                    pb_guard.set_position(0);
                    pb_guard.set_style(Self::bar_style());
                    pb_guard.set_message(name.to_string());
                }
                Progress::PairEvaluated => {
                    pb_guard.inc(1);
                }
                Progress::PairSkipped { z, n, reason } => {
                    debug!(z, n, "Pair skipped: {}", reason);
                }
                Progress::Match { nuclide, score } => {
                    debug!(nuclide = %nuclide, score, "Candidate inside the medical window.");
                }
                Progress::ScanFinish { matches } => {
                    let length = pb_guard.length().unwrap_or(0);
                    if pb_guard.position() < length {
                        pb_guard.set_position(length);
                    }
                    pb_guard.finish_with_message(format!("✓ {} candidates", matches));
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<20} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .with_key(
                "eta",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
                },
            )
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isoscore::core::models::nuclide::Nuclide;
    use std::thread;

    #[test]
    fn handler_initializes_in_a_clean_state() {
        let handler = CliProgressHandler::hidden();
        let pb = handler.pb.lock().unwrap();
        assert_eq!(pb.length(), Some(0));
        assert!(pb.is_finished());
    }

    #[test]
    fn callback_tracks_scan_progress() {
        let handler = CliProgressHandler::hidden();
        let callback = handler.get_callback();

        callback(Progress::ScanStart {
            name: "Medical scan",
            total_pairs: 100,
        });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.message(), "Medical scan");
            assert_eq!(pb.length(), Some(100));
            assert_eq!(pb.position(), 0);
            assert!(!pb.is_finished());
        }

        callback(Progress::PairEvaluated);
        callback(Progress::Match {
            nuclide: Nuclide::new(9, 9).unwrap(),
            score: 0.64,
        });
        callback(Progress::PairSkipped {
            z: 0,
            n: 0,
            reason: "empty nucleus".to_string(),
        });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.position(), 1);
        }

        callback(Progress::ScanFinish { matches: 4 });
        {
            let pb = handler.pb.lock().unwrap();
            assert!(pb.is_finished());
            assert_eq!(pb.position(), 100);
            assert_eq!(pb.message(), "✓ 4 candidates");
        }
    }

    #[test]
    fn callback_is_thread_safe() {
        let handler = CliProgressHandler::hidden();
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::ScanStart {
                name: "Thread Test",
                total_pairs: 2,
            });
            callback(Progress::PairEvaluated);
            callback(Progress::ScanFinish { matches: 0 });
        })
        .join()
        .unwrap();

        let pb = handler.pb.lock().unwrap();
        assert!(pb.is_finished());
        assert_eq!(pb.position(), 2);
    }
}
