use std::path::PathBuf;

use clap::ValueHint;
use wig::SegmentCount;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,wig=info,hedron=info,bake=info",
        env = "WIG_BAKE_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// Vertices per filament in the template mesh; clamped to 3..=64
    #[arg(short, long, default_value_t = SegmentCount::DEFAULT, env = "WIG_BAKE_SEGMENTS")]
    pub segments: u32,
    /// Where to write the foundation texture (DDS, RGBA32F). Defaults to the input path with a
    /// `.foundation.dds` extension.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub foundation_out: Option<PathBuf>,
    /// If given, also write the template mesh as an OBJ of line elements
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub template_out: Option<PathBuf>,
    /// Source mesh (Wavefront OBJ)
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    pub input: PathBuf,
}

impl Cli {
    pub fn foundation_path(&self) -> PathBuf {
        self.foundation_out
            .clone()
            .unwrap_or_else(|| self.input.with_extension("foundation.dds"))
    }
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
