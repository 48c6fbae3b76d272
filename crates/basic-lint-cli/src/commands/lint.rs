//! Lint command implementation.

use anyhow::{Context, Result};
use basic_lint_core::paths::normalize_input;
use basic_lint_core::{LintConfig, Profile, Walker};

use crate::config_resolver::ProfileSource;
use crate::OutputFormat;

/// Suffix and flag options collected from the command line.
#[derive(Debug, Default)]
pub struct LintOptions {
    /// Suffixes to ignore.
    pub ignore: Vec<String>,
    /// Suffixes to take out of the ignore list.
    pub add: Vec<String>,
    /// Suffixes that use windows line endings.
    pub windows: Vec<String>,
    /// Merge the common profile.
    pub common: bool,
    /// Skip undecodable files.
    pub skip_binary: bool,
    /// Fix instead of report.
    pub fix: bool,
}

/// Runs the lint command. Returns `true` when nothing was reported.
pub fn run(
    inputs: &[String],
    options: &LintOptions,
    source: &ProfileSource,
    format: OutputFormat,
) -> Result<bool> {
    let config = build_config(options, source)?;
    let roots = normalize_inputs(inputs);

    tracing::debug!(
        "Ignoring {} suffix(es), {} windows suffix(es)",
        config.ignore.len(),
        config.windows.len()
    );

    let result = Walker::new(&config)
        .walk_all(&roots)
        .context("Lint failed")?;

    super::output::print(&result, format)?;

    tracing::debug!(
        "Checked {} file(s): {} with problems, {} fixed, {} skipped",
        result.files_checked,
        result.reports.len(),
        result.files_fixed,
        result.files_skipped
    );

    Ok(result.is_clean())
}

/// Merges profiles, the common profile and command-line suffixes.
fn build_config(options: &LintOptions, source: &ProfileSource) -> Result<LintConfig> {
    let mut builder = LintConfig::builder()
        .ignores(options.ignore.iter().cloned())
        .unignores(options.add.iter().cloned())
        .windows_suffixes(options.windows.iter().cloned());

    if let Some(path) = source.implicit_path() {
        tracing::info!("Using profile {}", path.display());
    }
    for path in source.paths() {
        let profile = Profile::from_file(path)
            .with_context(|| format!("Failed to load profile: {}", path.display()))?;
        builder = builder.profile(&profile);
    }

    if options.common {
        builder = builder.common();
    }

    Ok(builder
        .skip_binary(options.skip_binary)
        .fix(options.fix)
        .build())
}

/// Normalizes inputs to `./`-rooted form, dropping repeats.
fn normalize_inputs(inputs: &[String]) -> Vec<String> {
    let mut roots: Vec<String> = Vec::with_capacity(inputs.len());
    for input in inputs {
        let root = normalize_input(input);
        if !roots.contains(&root) {
            roots.push(root);
        }
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    /// Runs `f` with an `info`-level subscriber and returns what it logged.
    fn logged_at_info<T>(f: impl FnOnce() -> T) -> (T, String) {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let out = tracing::subscriber::with_default(subscriber, f);
        (out, capture.text())
    }

    #[test]
    fn clean_run_is_silent_without_verbose() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "fine\n").unwrap();
        let inputs = vec![tmp.path().display().to_string()];

        let (clean, logs) = logged_at_info(|| {
            run(
                &inputs,
                &LintOptions::default(),
                &ProfileSource::None,
                OutputFormat::Text,
            )
            .unwrap()
        });
        assert!(clean);
        assert_eq!(logs, "");
    }

    #[test]
    fn implicit_profile_is_announced() {
        let tmp = TempDir::new().unwrap();
        let profile = tmp.path().join("basic-lint.toml");
        fs::write(&profile, "ignore = [\".tmp\"]\n").unwrap();

        let source = ProfileSource::Project(profile.clone());
        let (config, logs) =
            logged_at_info(|| build_config(&LintOptions::default(), &source).unwrap());
        assert!(config.ignore.matches("./a.tmp"));
        assert!(logs.contains(&format!("Using profile {}", profile.display())));

        let source = ProfileSource::Explicit(vec![profile]);
        let (_, logs) =
            logged_at_info(|| build_config(&LintOptions::default(), &source).unwrap());
        assert_eq!(logs, "");
    }

    #[test]
    fn normalize_inputs_dedupes() {
        let inputs = vec![".".to_string(), "./".to_string(), "src".to_string()];
        assert_eq!(normalize_inputs(&inputs), vec!["./", "./src"]);
    }

    #[test]
    fn build_config_merges_profiles_and_flags() {
        let tmp = TempDir::new().unwrap();
        let profile = tmp.path().join("p.toml");
        fs::write(&profile, "ignore = [\".tmp\"]\nwindows = [\".cmd\"]\n").unwrap();

        let options = LintOptions {
            ignore: vec![".bak".into()],
            add: vec![".log".into()],
            common: true,
            fix: true,
            ..LintOptions::default()
        };
        let source = ProfileSource::Explicit(vec![profile]);

        let config = build_config(&options, &source).unwrap();
        assert!(config.ignore.matches("./a.tmp"));
        assert!(config.ignore.matches("./a.bak"));
        assert!(config.ignore.matches("./a.png"));
        assert!(!config.ignore.matches("./a.log"));
        assert!(config.windows.matches("./a.cmd"));
        assert!(config.fix);
        assert!(!config.skip_binary);
    }

    #[test]
    fn build_config_reports_bad_profile() {
        let tmp = TempDir::new().unwrap();
        let profile = tmp.path().join("bad.toml");
        fs::write(&profile, "ignore = 3").unwrap();

        let source = ProfileSource::Explicit(vec![profile]);
        let err = build_config(&LintOptions::default(), &source).unwrap_err();
        assert!(err.to_string().contains("Failed to load profile"));
    }
}
