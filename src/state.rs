use {super::*, anyhow::Context};

pub(crate) struct State {
  failed: usize,
  help: HelpView,
  list_height: usize,
  loading: bool,
  message: String,
  mode: Mode,
  next_request_id: u64,
  pending_effects: Vec<Effect>,
  pending_preview: Option<PendingPreview>,
  provider_name: String,
  requested: usize,
  stories: ListView<Story>,
  transient_message: Option<TransientMessage>,
}

impl State {
  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  fn close_preview(&mut self) {
    self.mode = Mode::List;
    self.pending_preview = None;

    if !self.help.is_visible() {
      self.message = self.list_status();
    }
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::SelectNext => self.select_relative(1, true),
      Command::SelectPrevious => self.select_relative(1, false),
      Command::PageDown => self.select_relative(self.list_height.max(1), true),
      Command::PageUp => self.select_relative(self.list_height.max(1), false),
      Command::SelectFirst => self.stories.set_selected(0),
      Command::SelectLast => {
        if let Some(last) = self.stories.last_index() {
          self.stories.set_selected(last);
        }
      }
      Command::OpenStory => self.open_selected(|story| story.link()),
      Command::OpenComments => {
        self.open_selected(|story| story.comments_url.as_str());
      }
      Command::Preview => self.request_preview()?,
      Command::ClosePreview => self.close_preview(),
      Command::None => {}
    }

    Ok(CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Story { position, result } => match result {
        Ok(story) => {
          self.stories.push(story);

          if self.loading && !self.help.is_visible() {
            self.message = self.loading_status();
          }
        }
        Err(error) => {
          tracing::warn!(position, error = %error, "story failed to load");
          self.failed += 1;
        }
      },
      Event::Loaded => {
        self.loading = false;

        tracing::info!(
          loaded = self.stories.len(),
          failed = self.failed,
          "finished loading stories"
        );

        if !self.help.is_visible() && matches!(self.mode, Mode::List) {
          self.message = self.list_status();
        }
      }
      Event::Preview { request_id, result } => {
        let Some(pending) = self.pending_preview.as_ref() else {
          return;
        };

        if pending.request_id != request_id {
          return;
        }

        let Some(pending) = self.pending_preview.take() else {
          return;
        };

        match result {
          Ok(content) => {
            self.mode = Mode::Preview(PreviewView::new(pending.title, &content));

            if !self.help.is_visible() {
              self.message = PREVIEW_STATUS.into();
            }
          }
          Err(error) => {
            if !self.help.is_visible() {
              self.message = self.list_status();
              self.set_transient_message(format!(
                "Could not load preview: {error}"
              ));
            }
          }
        }
      }
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  fn list_status(&self) -> String {
    if self.loading {
      return self.loading_status();
    }

    match self.failed {
      0 => LIST_STATUS.into(),
      1 => format!("1 story failed to load • {LIST_STATUS}"),
      failed => format!("{failed} stories failed to load • {LIST_STATUS}"),
    }
  }

  pub(crate) fn list_height(&self) -> usize {
    self.list_height
  }

  pub(crate) fn loading(&self) -> bool {
    self.loading
  }

  fn loading_status(&self) -> String {
    format!(
      "Loading stories... {}/{}",
      self.stories.len() + self.failed,
      self.requested
    )
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn mode(&self) -> &Mode {
    &self.mode
  }

  pub(crate) fn mode_mut(&mut self) -> &mut Mode {
    &mut self.mode
  }

  pub(crate) fn new(provider_name: String, requested: usize) -> Self {
    let mut state = Self {
      failed: 0,
      help: HelpView::new(),
      list_height: 0,
      loading: true,
      message: String::new(),
      mode: Mode::List,
      next_request_id: 0,
      pending_effects: Vec::new(),
      pending_preview: None,
      provider_name,
      requested,
      stories: ListView::default(),
      transient_message: None,
    };

    state.message = state.loading_status();

    state
  }

  fn open_selected<F>(&mut self, link: F)
  where
    F: FnOnce(&Story) -> &str,
  {
    let Some(url) = self
      .stories
      .selected_item()
      .map(link)
      .filter(|url| !url.is_empty())
      .map(str::to_string)
    else {
      return;
    };

    self.pending_effects.push(Effect::OpenUrl { url });
  }

  pub(crate) fn provider_name(&self) -> &str {
    &self.provider_name
  }

  fn request_preview(&mut self) -> Result {
    let Some(story) = self.stories.selected_item() else {
      return Ok(());
    };

    if story.url.is_empty() {
      self.set_transient_message("No preview available".into());
      return Ok(());
    }

    let (title, url) = (story.title.clone(), story.url.clone());

    let request_id = self.next_request_id;

    self.next_request_id = self
      .next_request_id
      .checked_add(1)
      .context("preview request ids exhausted")?;

    self.pending_preview = Some(PendingPreview { request_id, title });

    if !self.help.is_visible() {
      self.message = LOADING_PREVIEW_STATUS.into();
    }

    self
      .pending_effects
      .push(Effect::FetchPreview { request_id, url });

    Ok(())
  }

  fn select_relative(&mut self, amount: usize, forward: bool) {
    let Some(current) = self.stories.selected_index() else {
      return;
    };

    self.stories.set_selected(if forward {
      current.saturating_add(amount)
    } else {
      current.saturating_sub(amount)
    });
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original));

    self.message = message;
  }

  pub(crate) fn stories(&self) -> &ListView<Story> {
    &self.stories
  }

  pub(crate) fn stories_mut(&mut self) -> &mut ListView<Story> {
    &mut self.stories
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }
}
