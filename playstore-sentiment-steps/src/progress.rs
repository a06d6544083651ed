// indicatif hides the spinner when stderr is not a terminal, the log line
// on finish keeps non-tty runs informed
use {
    std::time::{Duration, Instant},
    indicatif::{ProgressBar, ProgressStyle},
    tracing::info,
};

/// Spinner shown while a blocking step (fetching, fitting) runs.
pub struct Working {
    bar: ProgressBar,
    message: String,
    started_at: Instant,
}

impl Working {
    pub fn start(message: impl Into<String>) -> Self {
        let message = message.into();

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
        );
        bar.set_message(message.clone());
        bar.enable_steady_tick(Duration::from_millis(120));

        Self {
            bar,
            message,
            started_at: Instant::now(),
        }
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
        info!("{}: done in {:.2}s", self.message, self.started_at.elapsed().as_secs_f32());
    }
}
