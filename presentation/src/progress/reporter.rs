//! Progress reporting for discussion-mode turns

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use moot_application::TurnProgress;
use std::sync::Mutex;

/// Reports fan-out and synthesis progress with progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    fan_out_bar: Mutex<Option<ProgressBar>>,
    synthesis_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            fan_out_bar: Mutex::new(None),
            synthesis_bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap()
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnProgress for ProgressReporter {
    fn on_fan_out_start(&self, total: usize) {
        let pb = self.multi.add(ProgressBar::new(total as u64));
        pb.set_style(Self::bar_style());
        pb.set_prefix("Discussion");
        pb.set_message("Asking all models...");

        *self.fan_out_bar.lock().unwrap() = Some(pb);
    }

    fn on_model_answer(&self, model_key: &str, success: bool) {
        if let Some(pb) = self.fan_out_bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), model_key)
            } else {
                format!("{} {}", "x".red(), model_key)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_fan_out_complete(&self) {
        if let Some(pb) = self.fan_out_bar.lock().unwrap().take() {
            pb.finish_with_message("all answers in".green().to_string());
        }
    }

    fn on_synthesis_start(&self) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Synthesis");
        pb.set_message("Combining answers...");
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        *self.synthesis_bar.lock().unwrap() = Some(pb);
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Ok(mut bar) = self.synthesis_bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl TurnProgress for SimpleProgress {
    fn on_fan_out_start(&self, total: usize) {
        println!("{} Asking {} models...", "->".cyan(), total);
    }

    fn on_model_answer(&self, model_key: &str, success: bool) {
        if success {
            println!("  {} {}", "v".green(), model_key);
        } else {
            println!("  {} {} (failed)", "x".red(), model_key);
        }
    }

    fn on_fan_out_complete(&self) {
        println!();
    }

    fn on_synthesis_start(&self) {
        println!("{} Synthesizing combined answer...", "->".cyan());
    }
}
