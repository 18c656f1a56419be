//! Progress Feedback
//!
//! Terminal spinner used while the generator request is in flight.

use super::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

const TEMPLATE: &str = "{spinner:.green} {msg} [{bar:20.cyan/blue}] {pos}%";

/// Spinner with a percentage bar, drawn on stderr
#[derive(Default)]
pub struct SpinnerProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl std::fmt::Debug for SpinnerProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let active = self.bar.lock().map(|guard| guard.is_some()).unwrap_or(false);
        f.debug_struct("SpinnerProgress")
            .field("active", &active)
            .finish()
    }
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock() {
            if let Some(bar) = guard.as_ref() {
                f(bar);
            }
        }
    }

    fn take_bar(&self) -> Option<ProgressBar> {
        self.bar.lock().ok().and_then(|mut guard| guard.take())
    }
}

impl ProgressReporter for SpinnerProgress {
    fn begin(&self, title: &str) {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::with_template(TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .progress_chars("=> "),
        );
        bar.set_message(title.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.bar.lock() {
            if let Some(previous) = guard.replace(bar) {
                previous.finish_and_clear();
            }
        }
    }

    fn report(&self, increment: u8) {
        self.with_bar(|bar| bar.inc(u64::from(increment)));
    }

    fn finish(&self) {
        if let Some(bar) = self.take_bar() {
            bar.finish_and_clear();
        }
    }

    fn abandon(&self) {
        if let Some(bar) = self.take_bar() {
            bar.abandon();
        }
    }
}

/// Progress reporter that only logs
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn begin(&self, title: &str) {
        debug!("⏳ {}", title);
    }

    fn report(&self, increment: u8) {
        debug!("⏳ +{}%", increment);
    }

    fn finish(&self) {
        debug!("⏳ done");
    }

    fn abandon(&self) {
        debug!("⏳ abandoned");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let progress = SpinnerProgress::new();
        progress.begin("Fetching hipster ipsum...");
        progress.report(0);
        progress.with_bar(|bar| assert_eq!(bar.position(), 0));
        progress.report(100);
        progress.with_bar(|bar| assert_eq!(bar.position(), 100));
        progress.finish();
        assert!(progress.take_bar().is_none());
    }

    #[test]
    fn test_spinner_abandon_and_idle_calls() {
        let progress = SpinnerProgress::new();
        progress.report(10);
        progress.finish();
        progress.begin("work");
        progress.abandon();
        assert!(progress.take_bar().is_none());
    }
}
