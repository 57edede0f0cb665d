use std::path::PathBuf;

use faqgen_core::{Msg, OutputType, PickedFile};
use faqgen_engine::declared_type_for_path;

pub const HELP: &str = "\
Type or paste document text; each plain line is appended to the document.
Commands:
  :open <path>...   choose a file (only the first is used)
  :drop <path>...   drop a file onto the upload area
  :drag / :leave    move a drag over / away from the upload area
  :clear            empty the document text
  :count <n>        number of questions (1-20)
  :type faqs|interview
  :generate         generate questions
  :download         save the list as strict-faqs.txt
  :show             redraw the page
  :help             this text
  :quit             leave
Start a line with '::' to paste text that begins with ':'.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Paste(String),
    Open(Vec<PathBuf>),
    Drop(Vec<PathBuf>),
    Drag,
    Leave,
    Clear,
    Count(String),
    Type(String),
    Generate,
    Download,
    Show,
    Help,
    Quit,
    Unknown(String),
}

/// What the main loop should do with one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Dispatch(Vec<Msg>),
    Show,
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_command(line: &str) -> Command {
    if let Some(text) = line.strip_prefix("::") {
        return Command::Paste(format!(":{text}"));
    }
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Paste(line.to_string());
    };

    let rest = rest.trim();
    let (name, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let args = args.trim();
    let paths = || args.split_whitespace().map(PathBuf::from).collect();
    match name {
        "open" | "browse" => Command::Open(paths()),
        "drop" => Command::Drop(paths()),
        "drag" => Command::Drag,
        "leave" => Command::Leave,
        "clear" => Command::Clear,
        "count" => Command::Count(args.to_string()),
        "type" => Command::Type(args.to_string()),
        "generate" | "gen" => Command::Generate,
        "download" => Command::Download,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(name.to_string()),
    }
}

/// Translates a command into messages; `current_text` is the document buffer.
pub fn resolve(command: Command, current_text: &str) -> Action {
    match command {
        Command::Paste(line) => Action::Dispatch(vec![Msg::TextEdited(format!(
            "{current_text}{line}\n"
        ))]),
        Command::Open(paths) if paths.is_empty() => Action::Invalid(":open needs a path".into()),
        Command::Open(paths) => Action::Dispatch(vec![Msg::FilesPicked(picked(paths))]),
        Command::Drop(paths) => Action::Dispatch(vec![
            Msg::DragEntered,
            Msg::FilesDropped(picked(paths)),
        ]),
        Command::Drag => Action::Dispatch(vec![Msg::DragEntered]),
        Command::Leave => Action::Dispatch(vec![Msg::DragLeft]),
        Command::Clear => Action::Dispatch(vec![Msg::TextEdited(String::new())]),
        Command::Count(raw) => Action::Dispatch(vec![Msg::CountChanged(raw)]),
        Command::Type(value) => match OutputType::from_value(&value) {
            Some(output_type) => Action::Dispatch(vec![Msg::OutputTypeChanged(output_type)]),
            None => Action::Invalid(format!("unknown output type {value:?}; use faqs or interview")),
        },
        Command::Generate => Action::Dispatch(vec![Msg::GenerateClicked]),
        Command::Download => Action::Dispatch(vec![Msg::DownloadClicked]),
        Command::Show => Action::Show,
        Command::Help => Action::Help,
        Command::Quit => Action::Quit,
        Command::Unknown(name) => Action::Invalid(format!("unknown command :{name}; try :help")),
    }
}

fn picked(paths: Vec<PathBuf>) -> Vec<PickedFile> {
    paths
        .into_iter()
        .map(|path| {
            let declared = declared_type_for_path(&path).map(str::to_string);
            PickedFile::new(path, declared)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_lines_are_pasted() {
        assert_eq!(parse_command("hello"), Command::Paste("hello".into()));
        assert_eq!(parse_command(""), Command::Paste(String::new()));
        assert_eq!(parse_command("::literal"), Command::Paste(":literal".into()));
    }

    #[test]
    fn commands_take_arguments() {
        assert_eq!(parse_command(":count  12 "), Command::Count("12".into()));
        assert_eq!(parse_command(":type interview"), Command::Type("interview".into()));
        assert_eq!(
            parse_command(":drop a.txt b.pdf"),
            Command::Drop(vec![PathBuf::from("a.txt"), PathBuf::from("b.pdf")])
        );
        assert_eq!(parse_command(":generate"), Command::Generate);
        assert_eq!(parse_command(":nope"), Command::Unknown("nope".into()));
    }

    #[test]
    fn paste_appends_a_line() {
        assert_eq!(
            resolve(Command::Paste("second".into()), "first\n"),
            Action::Dispatch(vec![Msg::TextEdited("first\nsecond\n".into())])
        );
    }

    #[test]
    fn drop_enters_then_drops_with_declared_types() {
        let action = resolve(
            Command::Drop(vec![PathBuf::from("docs/a.txt"), PathBuf::from("b.pdf")]),
            "",
        );
        let Action::Dispatch(msgs) = action else {
            panic!("expected dispatch");
        };
        assert_eq!(msgs[0], Msg::DragEntered);
        let Msg::FilesDropped(files) = &msgs[1] else {
            panic!("expected drop");
        };
        assert_eq!(files[0].name, "a.txt");
        assert_eq!(files[0].declared_type.as_deref(), Some("text/plain"));
        assert_eq!(files[1].declared_type.as_deref(), Some("application/pdf"));
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert!(matches!(resolve(Command::Open(Vec::new()), ""), Action::Invalid(_)));
        assert!(matches!(resolve(Command::Type("quiz".into()), ""), Action::Invalid(_)));
    }
}
