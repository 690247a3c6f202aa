#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  ClosePreview,
  HideHelp,
  None,
  OpenComments,
  OpenStory,
  PageDown,
  PageUp,
  Preview,
  Quit,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
}
