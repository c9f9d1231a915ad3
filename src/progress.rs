use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        let term = Term::stderr();
        Self {
            term,
            spinner_position: AtomicUsize::new(0),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    /// Reporter only when stderr is an interactive terminal
    pub fn for_terminal() -> Option<Self> {
        if Term::stderr().is_term() {
            Some(Self::new())
        } else {
            None
        }
    }

    pub fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        let style = ProgressStyle::default_bar()
            .template(PROGRESS_BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ");
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        let style = ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["◐ ", "◓ ", "◑ ", "◒ ", "✓"]);
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn next_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn start_loading(&mut self, total_files: usize) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} Loading {} graph {}...",
            style("📂").cyan(),
            style(total_files).yellow(),
            pluralize("file", total_files)
        );
        let spinner = self.create_spinner("Reading graphs...");
        self.current_bar = Some(spinner);
    }

    pub fn checking_file(&self, path: &Path) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Checking: {}...", path.display()));
        } else {
            let _ = self.term.clear_line();
            eprint!(
                "\r{} Checking: {}... ",
                style(self.next_frame()).cyan(),
                style(path.display()).dim()
            );
        }
    }

    pub fn finish_loading(&mut self, odd_cycles: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        if odd_cycles == 0 {
            eprintln!("\r{} Every graph is bipartite", style("✓").green().bold());
        } else {
            eprintln!(
                "\r{} Found {} {} with an odd cycle",
                style("⚠").yellow().bold(),
                style(odd_cycles).red().bold(),
                pluralize("graph", odd_cycles)
            );
        }
    }

    pub fn start_suite(&mut self, total_cases: usize) -> ProgressBar {
        let pb = self.create_progress_bar(total_cases as u64, "Running cases");
        self.current_bar = Some(pb.clone());
        pb
    }

    pub fn finish_suite(&mut self, failed: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        if failed == 0 {
            eprintln!(
                "{} Oracle agrees with the reference on every case",
                style("✓").green().bold()
            );
        } else {
            eprintln!(
                "{} {} {} failed",
                style("⚠").yellow().bold(),
                style(failed).red().bold(),
                pluralize("case", failed)
            );
        }
    }
}
