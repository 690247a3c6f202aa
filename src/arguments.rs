use super::*;

pub(crate) const DEFAULT_CONCURRENCY: usize = 16;

pub(crate) const DEFAULT_LIMIT: usize = 30;

/// Top stories from news aggregators, in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Arguments {
  /// Override the provider's API base URL
  #[arg(long, env = "NEWSDESK_BASE_URL")]
  pub(crate) base_url: Option<String>,

  /// Maximum number of stories fetched at once, 0 for no limit
  #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
  pub(crate) concurrency: usize,

  /// Number of stories to load
  #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
  pub(crate) limit: usize,

  /// Write logs to this file instead of standard error
  #[arg(long)]
  pub(crate) log_file: Option<PathBuf>,

  /// Print stories and exit instead of opening the interactive list
  #[arg(long)]
  pub(crate) print: bool,

  /// Where stories come from
  #[arg(
    short,
    long,
    value_enum,
    env = "NEWSDESK_PROVIDER",
    default_value_t = ProviderKind::default()
  )]
  pub(crate) provider: ProviderKind,

  /// Which listing to load
  #[arg(
    short = 't',
    long = "type",
    value_enum,
    default_value_t = StoryType::default()
  )]
  pub(crate) story_type: StoryType,

  /// Fail on the first story that cannot be loaded (with --print)
  #[arg(long)]
  pub(crate) strict: bool,

  /// Restrict reddit to a single subreddit
  #[arg(short, long, env = "NEWSDESK_SUBREDDIT")]
  pub(crate) subreddit: Option<String>,
}

impl Arguments {
  pub(crate) fn concurrency(&self) -> Option<usize> {
    Some(self.concurrency).filter(|&concurrency| concurrency > 0)
  }

  pub(crate) fn error_policy(&self) -> ErrorPolicy {
    if self.strict {
      ErrorPolicy::Abort
    } else {
      ErrorPolicy::Skip
    }
  }

  pub(crate) fn log_filter(&self) -> &'static str {
    if self.print || self.log_file.is_some() {
      "warn"
    } else {
      "off"
    }
  }
}
