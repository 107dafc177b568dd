//! `sonnetscan` - classify poems as Shakespearean, Petrarchan or Spenserian sonnets.
//!
//! Usage: sonnetscan [--dictionary PATH] [--scan] [--skip-blank-lines] [--scheme] [--json] [--verbose] POEM...

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use sonnetscan::config::Config;
use sonnetscan::{Analyzer, PoemReport};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: sonnetscan [OPTIONS] POEM...

Options:
  --dictionary PATH    Pronunciation dictionary (default: dictionary.txt, env SONNET_DICTIONARY)
  --scan               Rescan the dictionary file for every word instead of loading it once
  --skip-blank-lines   Leave blank lines out of the rhyme scheme
  --scheme             Print the derived rhyme scheme next to the form
  --json               Print a JSON report
  --verbose            Log lookups to stderr
  --help               Show this message";

/// Parsed command line.
#[derive(Debug, Default)]
struct Args {
    dictionary: Option<PathBuf>,
    scan: bool,
    skip_blank_lines: bool,
    scheme: bool,
    json: bool,
    verbose: bool,
    help: bool,
    poems: Vec<PathBuf>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut parsed = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--dictionary" => {
                    let path = args.next().context("--dictionary needs a path")?;
                    parsed.dictionary = Some(PathBuf::from(shellexpand::tilde(&path).to_string()));
                }
                "--scan" => parsed.scan = true,
                "--skip-blank-lines" => parsed.skip_blank_lines = true,
                "--scheme" => parsed.scheme = true,
                "--json" => parsed.json = true,
                "--verbose" | "-v" => parsed.verbose = true,
                "--help" | "-h" => parsed.help = true,
                flag if flag.starts_with("--") => bail!("unknown option {flag}\n\n{USAGE}"),
                _ => parsed.poems.push(PathBuf::from(arg)),
            }
        }

        Ok(parsed)
    }

    fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.dictionary {
            config.dictionary_path.clone_from(path);
        }
        if self.scan {
            config.preload_dictionary = false;
        }
        if self.skip_blank_lines {
            config.skip_blank_lines = true;
        }
    }
}

/// Log filter directives: `--verbose` wins, then `RUST_LOG`, then `warn`.
fn log_directives(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }
    rust_log
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "warn".to_string())
}

fn init_logging(verbose: bool) {
    let directives = log_directives(verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log filter {directives:?}: {e}");
        EnvFilter::new("warn")
    });

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn print_report(report: &PoemReport, with_scheme: bool) {
    if with_scheme {
        println!("{}: {} [{}]", report.path.display(), report.form, report.scheme);
    } else {
        println!("{}: {}", report.path.display(), report.form);
    }
}

fn main() -> Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;

    if args.help {
        println!("{USAGE}");
        return Ok(());
    }
    if args.poems.is_empty() {
        bail!("no poem files given\n\n{USAGE}");
    }

    init_logging(args.verbose);

    let mut config = Config::load().context("Failed to load configuration")?;
    args.apply(&mut config);
    tracing::debug!("{} {} using {}", config.app_name(), config.app_version(), config.dictionary_path.display());

    let analyzer = Analyzer::from_config(&config).with_context(|| {
        format!("Failed to open dictionary {}", config.dictionary_path.display())
    })?;

    let mut reports = Vec::with_capacity(args.poems.len());
    for poem in &args.poems {
        let report = analyzer
            .analyze(poem)
            .with_context(|| format!("Failed to classify {}", poem.display()))?;

        if !args.json {
            print_report(&report, args.scheme);
        }
        reports.push(report);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse(args.iter().map(ToString::to_string))
    }

    #[test]
    fn parses_flags_and_poems() {
        let args = parse(&["--scheme", "--dictionary", "cmu.txt", "a.txt", "--scan", "b.txt"]).unwrap();
        assert!(args.scheme);
        assert!(args.scan);
        assert!(!args.json);
        assert_eq!(args.dictionary, Some(PathBuf::from("cmu.txt")));
        assert_eq!(args.poems, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    }

    #[test]
    fn dictionary_flag_needs_value() {
        assert!(parse(&["--dictionary"]).is_err());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(parse(&["--colour", "a.txt"]).is_err());
    }

    #[test]
    fn rust_log_is_used_unless_verbose() {
        assert_eq!(log_directives(false, Some("debug".to_string())), "debug");
        assert_eq!(log_directives(false, Some("sonnetscan=info".to_string())), "sonnetscan=info");
        assert_eq!(log_directives(false, None), "warn");
        assert_eq!(log_directives(false, Some("  ".to_string())), "warn");
        assert_eq!(log_directives(true, Some("error".to_string())), "debug");
    }

    #[test]
    fn flags_override_config() {
        let args = parse(&["--scan", "--skip-blank-lines", "--dictionary", "d.txt"]).unwrap();
        let mut config = Config::default();
        args.apply(&mut config);
        assert!(!config.preload_dictionary);
        assert!(config.skip_blank_lines);
        assert_eq!(config.dictionary_path, PathBuf::from("d.txt"));
    }
}
