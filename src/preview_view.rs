use super::*;

pub(crate) struct PreviewView {
  lines: Vec<String>,
  scroll: usize,
  title: String,
}

impl PreviewView {
  pub(crate) fn draw(&self, frame: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(2).max(1) as usize;

    let lines = self
      .lines
      .iter()
      .flat_map(|line| {
        if line.is_empty() {
          vec![String::new()]
        } else {
          wrap_text(line, width)
        }
      })
      .skip(self.scroll())
      .map(Line::from)
      .collect::<Vec<_>>();

    let preview = Paragraph::new(lines).block(
      Block::default()
        .title(truncate(self.title(), width))
        .borders(Borders::ALL),
    );

    frame.render_widget(preview, area);
  }

  pub(crate) fn new(title: String, content: &str) -> Self {
    let content = if content.trim().is_empty() {
      NO_PREVIEW
    } else {
      content
    };

    Self {
      lines: content.lines().map(str::to_string).collect(),
      scroll: 0,
      title,
    }
  }

  pub(crate) fn scroll(&self) -> usize {
    self.scroll
  }

  pub(crate) fn scroll_down(&mut self, amount: usize) {
    let max = self.lines.len().saturating_sub(1);
    self.scroll = self.scroll.saturating_add(amount).min(max);
  }

  pub(crate) fn scroll_up(&mut self, amount: usize) {
    self.scroll = self.scroll.saturating_sub(amount);
  }

  pub(crate) fn title(&self) -> &str {
    &self.title
  }
}
