use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(layout[1].height as usize / 2);

    let header = Paragraph::new(Line::from(Span::styled(
      format!("newsdesk - {} ('?' for help)", self.state.provider_name()),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(header, layout[0]);

    if let Mode::Preview(view) = self.state.mode() {
      view.draw(frame, layout[1]);
    } else {
      self.draw_stories(frame, layout[1]);
    }

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
  }

  fn draw_stories(&mut self, frame: &mut Frame, area: Rect) {
    let provider_name = self.state.provider_name().to_string();

    let stories = self.state.stories();

    let items: Vec<ListItem> = if stories.is_empty() {
      let text = if self.state.loading() {
        LOADING_STORIES_STATUS
      } else {
        NO_STORIES
      };

      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw(text),
      ]))]
    } else {
      stories
        .items()
        .iter()
        .map(|story| Self::story_list_item(story, &provider_name))
        .collect()
    };

    let mut list_state = ListState::default()
      .with_selected(stories.selected_index())
      .with_offset(stories.offset());

    let list = List::new(items).highlight_style(
      Style::default()
        .bg(Color::Blue)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD),
    );

    frame.render_stateful_widget(list, area, &mut list_state);

    self.state.stories_mut().set_offset(list_state.offset());
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchPreview { request_id, url } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let _ = sender.send(Event::Preview {
            request_id,
            result: client.preview(&url).await,
          });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
    }
  }

  /// Starts draining `stream` in the background; stories show up in the
  /// list as they resolve, in request order.
  pub(crate) fn new(
    client: Client,
    provider_name: String,
    requested: usize,
    stream: StoryStream,
  ) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let handle = Handle::current();

    let sender = event_tx.clone();

    handle.spawn(async move {
      drain(stream, |position, result| {
        let _ = sender.send(Event::Story { position, result });
      })
      .await;

      let _ = sender.send(Event::Loaded);
    });

    Self {
      client,
      event_rx,
      event_tx,
      handle,
      state: State::new(provider_name, requested),
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(100))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        let page = self.state.list_height().max(1);
        self.state.mode_mut().handle_key(key, page)
      };

      match self.state.dispatch_command(command) {
        Ok(dispatch) => {
          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            break;
          }
        }
        Err(error) => {
          self.state.clear_pending_effects();
          self.state.set_transient_message(format!("error: {error}"));
        }
      }
    }

    Ok(())
  }

  fn story_list_item<'a>(story: &'a Story, provider_name: &str) -> ListItem<'a> {
    let mut spans = vec![
      Span::raw(BASE_INDENT),
      Span::styled(story.title.as_str(), Style::default().fg(Color::Magenta)),
    ];

    let domain = story.domain(provider_name);

    if !domain.is_empty() {
      spans.push(Span::raw(" "));
      spans.push(Span::styled(domain, Style::default().fg(Color::DarkGray)));
    }

    if story.comments_count > 0 {
      let style = if story.comments_count > 100 {
        Style::default().fg(Color::Magenta)
      } else {
        Style::default().fg(Color::White)
      };

      spans.push(Span::raw(" "));
      spans.push(Span::styled(format!("[{}]", story.comments_count), style));
    }

    ListItem::new(vec![Line::from(spans), Line::from(Span::raw(BASE_INDENT))])
  }
}
