use {
  aggregate::{collect, drain},
  anyhow::Context as _,
  app::App,
  arguments::Arguments,
  async_trait::async_trait,
  clap::Parser,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  error::{Error, FetchResult},
  error_policy::ErrorPolicy,
  event::Event,
  futures::{Stream, StreamExt},
  hacker_news::HackerNews,
  help_view::HelpView,
  list_view::ListView,
  lobsters::Lobsters,
  mode::Mode,
  pending_preview::PendingPreview,
  pending_story::PendingStory,
  preview_view::PreviewView,
  provider::{Provider, ProviderKind},
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
  },
  reddit::Reddit,
  serde::{Deserialize, de::DeserializeOwned},
  state::State,
  std::{
    backtrace::BacktraceStatus,
    fs::File,
    io::{self, IsTerminal, Stdout},
    path::PathBuf,
    pin::Pin,
    process,
    sync::{Arc, Mutex},
    task::{self, Poll},
    time::{Duration, Instant},
  },
  story::Story,
  story_stream::StoryStream,
  story_type::StoryType,
  tokio::{
    runtime::Handle,
    sync::{
      Semaphore,
      mpsc::{self, UnboundedReceiver, UnboundedSender},
      oneshot,
    },
  },
  tracing_subscriber::EnvFilter,
  transient_message::TransientMessage,
  url::Url,
  utils::{plain_line, truncate, wrap_text},
};

mod aggregate;
mod app;
mod arguments;
mod client;
mod command;
mod command_dispatch;
mod effect;
mod error;
mod error_policy;
mod event;
mod hacker_news;
mod help_view;
mod list_view;
mod lobsters;
mod mode;
mod pending_preview;
mod pending_story;
mod preview_view;
mod provider;
mod reddit;
mod state;
mod story;
mod story_stream;
mod story_type;
mod transient_message;
mod utils;

const LIST_STATUS: &str = "↑/k up • ↓/j down • enter/o open • c comments • p preview • q quit • ? help";

const PREVIEW_STATUS: &str =
  "↑/k ↓/j scroll • o open • c comments • esc/p back • q quit";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_PREVIEW_STATUS: &str = "Loading preview...";
const LOADING_STORIES_STATUS: &str = "Loading stories...";

const NO_PREVIEW: &str = "No preview available";
const NO_STORIES: &str = "Nothing to show.";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Stories:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home/g  jump to first story
  end/G   jump to last story
  enter   open the selected story in your browser
  o       open the selected story in your browser
  c       open the comments page in your browser
  p       preview the selected story as text
  q       quit
  ?       toggle this help

Preview:
  ↑ / k   scroll up
  ↓ / j   scroll down
  space   page down
  o       open the story in your browser
  c       open the comments page
  esc/p   back to the list
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn initialize_tracing(arguments: &Arguments) -> Result {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(arguments.log_filter()));

  let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

  if let Some(path) = &arguments.log_file {
    let file = File::create(path).with_context(|| {
      format!("could not create log file {}", path.display())
    })?;

    subscriber.with_ansi(false).with_writer(Mutex::new(file)).init();
  } else {
    subscriber.with_writer(io::stderr).init();
  }

  Ok(())
}

async fn print_stories(
  stream: StoryStream,
  provider_name: &str,
  policy: ErrorPolicy,
) -> Result {
  let collected = collect(stream, policy).await?;

  for story in &collected.stories {
    println!("{}", plain_line(story, provider_name));
  }

  if !collected.failures.is_empty() {
    eprintln!("{} stories could not be loaded", collected.failures.len());
  }

  Ok(())
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  initialize_tracing(&arguments)?;

  let client = Client::default();

  let provider = arguments.provider.build(client.clone(), &arguments);

  let provider_name = provider.name();

  let stream = provider
    .get_stories(arguments.story_type, arguments.limit)
    .await
    .with_context(|| format!("could not load stories from {provider_name}"))?;

  if arguments.print {
    return print_stories(stream, &provider_name, arguments.error_policy())
      .await;
  }

  tracing::info!(provider = %provider_name, "starting interactive list");

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, provider_name, arguments.limit, stream);

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
