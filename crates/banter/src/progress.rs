/// A "thinking" indicator shown while a persona is waiting for its reply.
/// It is cleared when dropped.
#[cfg(feature = "cli")]
pub struct Spinner(indicatif::ProgressBar);

#[cfg(feature = "cli")]
impl Spinner {
    pub fn start(name: &str) -> Self {
        use std::time::Duration;

        use indicatif::{ProgressBar, ProgressStyle};

        let style = ProgressStyle::with_template("{spinner} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        let progress_bar = ProgressBar::new_spinner();
        progress_bar.set_style(style);
        progress_bar.set_message(format!("🤔 {name} is thinking..."));
        progress_bar.enable_steady_tick(Duration::from_millis(100));
        Self(progress_bar)
    }
}

#[cfg(feature = "cli")]
impl Drop for Spinner {
    fn drop(&mut self) {
        self.0.finish_and_clear();
    }
}

#[cfg(not(feature = "cli"))]
pub struct Spinner;

#[cfg(not(feature = "cli"))]
impl Spinner {
    #[inline]
    pub fn start(_name: &str) -> Self {
        Self
    }
}
