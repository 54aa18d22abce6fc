use clap::builder::TypedValueParser;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal that supports it
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn use_color(self) -> bool {
        match self {
            ColorMode::Auto => flourish::stdout_supports_color(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "inspiration", bin_name = "inspiration", version = get_version())]
#[command(about = "Prints a random inspirational quote", long_about = None)]
pub struct Cli {
    /// Quote file to read (defaults to inspiration.csv next to the executable)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Lay the card out for a terminal this many columns wide
    #[arg(
        short,
        long,
        value_name = "COLS",
        value_parser = clap::value_parser!(u16).map(usize::from)
    )]
    pub width: Option<usize>,

    /// When to color the output
    #[arg(long, value_enum, default_value_t)]
    pub color: ColorMode,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
