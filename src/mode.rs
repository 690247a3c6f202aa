use super::*;

pub(crate) enum Mode {
  List,
  Preview(PreviewView),
}

impl Mode {
  pub(crate) fn handle_key(&mut self, key: KeyEvent, page: usize) -> Command {
    let modifiers = key.modifiers;

    if key.code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL)
    {
      return Command::Quit;
    }

    match self {
      Mode::List => match key.code {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('?') => Command::ShowHelp,
        KeyCode::Down | KeyCode::Char('j') => Command::SelectNext,
        KeyCode::Up | KeyCode::Char('k') => Command::SelectPrevious,
        KeyCode::PageDown => Command::PageDown,
        KeyCode::PageUp => Command::PageUp,
        KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
          Command::PageDown
        }
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
          Command::PageUp
        }
        KeyCode::Home | KeyCode::Char('g') => Command::SelectFirst,
        KeyCode::End | KeyCode::Char('G') => Command::SelectLast,
        KeyCode::Enter | KeyCode::Char('o' | 'O') => Command::OpenStory,
        KeyCode::Char('c' | 'C') => Command::OpenComments,
        KeyCode::Char('p' | 'P') => Command::Preview,
        _ => Command::None,
      },
      Mode::Preview(view) => match key.code {
        KeyCode::Char('q' | 'Q') => Command::Quit,
        KeyCode::Esc | KeyCode::Char('p' | 'P') => Command::ClosePreview,
        KeyCode::Char('?') => Command::ShowHelp,
        KeyCode::Down | KeyCode::Char('j') => {
          view.scroll_down(1);
          Command::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
          view.scroll_up(1);
          Command::None
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
          view.scroll_down(page);
          Command::None
        }
        KeyCode::PageUp => {
          view.scroll_up(page);
          Command::None
        }
        KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
          view.scroll_down(page);
          Command::None
        }
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
          view.scroll_up(page);
          Command::None
        }
        KeyCode::Home => {
          view.scroll_up(usize::MAX);
          Command::None
        }
        KeyCode::Enter | KeyCode::Char('o' | 'O') => Command::OpenStory,
        KeyCode::Char('c' | 'C') => Command::OpenComments,
        _ => Command::None,
      },
    }
  }
}
