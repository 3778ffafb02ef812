#![forbid(unsafe_code)]

//! Demo options.
//!
//! Flags are parsed by hand. Each flag has a `FOLIO_DEMO_*` environment
//! twin that is read first, so an explicit flag always wins.

use std::env;
use std::path::PathBuf;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_TEXT: &str = "Folio lays text out on fixed-size pages.\n\
Rows wrap at the page's content width; pages are stacked vertically \
with a gap between them, and the caret remembers its column while moving \
up and down.";

const HELP_TEXT: &str = "\
Folio Demo - a scripted editing session on the headless renderer

USAGE:
    folio-demo [OPTIONS]

OPTIONS:
    --config=PATH        Load editor configuration from a JSON file
    --text=STRING        Initial document text (\\n starts a new line)
    --viewport=WxH       Viewport size in pixels (default: 580x680)
    --debug-overlay      Draw baselines, midlines and glyph centers
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    FOLIO_DEMO_CONFIG         Override --config
    FOLIO_DEMO_TEXT           Override --text
    FOLIO_DEMO_VIEWPORT       Override --viewport
    RUST_LOG                  Log filter (default: info)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    /// JSON config file.
    pub config: Option<PathBuf>,
    /// Initial document text.
    pub text: String,
    /// Viewport size override.
    pub viewport: Option<(f32, f32)>,
    /// Whether to paint the debug overlay.
    pub debug_overlay: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            config: None,
            text: DEFAULT_TEXT.into(),
            viewport: None,
            debug_overlay: false,
        }
    }
}

impl Opts {
    /// Read the environment, then the process arguments. Exits on `--help`,
    /// `--version` and malformed flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        if let Ok(val) = env::var("FOLIO_DEMO_CONFIG") {
            opts.config = Some(val.into());
        }
        if let Ok(val) = env::var("FOLIO_DEMO_TEXT") {
            opts.text = unescape(&val);
        }
        if let Ok(val) = env::var("FOLIO_DEMO_VIEWPORT")
            && let Some(size) = parse_viewport(&val)
        {
            opts.viewport = Some(size);
        }

        for arg in env::args().skip(1) {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("folio-demo {VERSION}");
                    process::exit(0);
                }
                other => {
                    if let Err(msg) = opts.apply(other) {
                        eprintln!("{msg}");
                        eprintln!("Run with --help for usage information.");
                        process::exit(1);
                    }
                }
            }
        }

        opts
    }

    /// Apply one `--flag` or `--flag=value` argument.
    pub fn apply(&mut self, arg: &str) -> Result<(), String> {
        if arg == "--debug-overlay" {
            self.debug_overlay = true;
        } else if let Some(val) = arg.strip_prefix("--config=") {
            self.config = Some(val.into());
        } else if let Some(val) = arg.strip_prefix("--text=") {
            self.text = unescape(val);
        } else if let Some(val) = arg.strip_prefix("--viewport=") {
            match parse_viewport(val) {
                Some(size) => self.viewport = Some(size),
                None => return Err(format!("Invalid --viewport value: {val}")),
            }
        } else {
            return Err(format!("Unknown argument: {arg}"));
        }
        Ok(())
    }
}

/// Parse `WxH` into a non-negative size.
pub fn parse_viewport(val: &str) -> Option<(f32, f32)> {
    let (w, h) = val.split_once(['x', 'X'])?;
    let w: f32 = w.trim().parse().ok()?;
    let h: f32 = h.trim().parse().ok()?;
    (w.is_finite() && h.is_finite() && w >= 0.0 && h >= 0.0).then_some((w, h))
}

/// Turn the two-character sequence `\n` into a newline.
fn unescape(val: &str) -> String {
    val.replace("\\n", "\n")
}
