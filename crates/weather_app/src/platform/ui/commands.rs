use thiserror::Error;
use weather_core::{HoverTarget, HoveredCard, ListKind, Msg, SortType, WeatherTag};

pub const HELP: &str = "\
commands:
  search <text>              filter the catalog by name
  sort asc|desc|none         order the catalog
  filter <condition>         toggle a weather condition on the chosen list
  drag small|big <city>      lift a card out of a list
  over small|big [<city>|_]  move the pointer over a card, the placeholder (_) or empty space
  drop                       release the pointer
  end                        finish the drag
  hover|leave|click <city>   card notifications
  marker|unmarker <city>     map marker notifications
  show | help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Msg),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),
    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("unknown sort {0:?}, use asc, desc or none")]
    InvalidSort(String),
    #[error("unknown weather condition {0:?}")]
    InvalidTag(String),
    #[error("unknown list {0:?}, use small or big")]
    InvalidList(String),
}

pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        // Search keeps its text verbatim so whitespace-only edits reach the core.
        "search" => {
            let text = rest.trim_end_matches(['\r', '\n']);
            Command::Dispatch(Msg::FilterTextChanged(text.to_string()))
        }
        "sort" => {
            let raw = required(rest, "sort", "asc, desc or none")?;
            let sort =
                SortType::parse(raw).ok_or_else(|| CommandError::InvalidSort(raw.to_string()))?;
            Command::Dispatch(Msg::SortSelected(sort))
        }
        "filter" => {
            let raw = required(rest, "filter", "a weather condition")?;
            let tag =
                WeatherTag::parse(raw).ok_or_else(|| CommandError::InvalidTag(raw.to_string()))?;
            Command::Dispatch(Msg::FilterTagToggled(tag))
        }
        "drag" => {
            let (list, city) = list_and_rest(rest, "drag")?;
            let city = required(city, "drag", "a list and a city")?;
            Command::Dispatch(Msg::DragStarted {
                city: city.to_string(),
                source: list,
            })
        }
        "over" => {
            let (list, card) = list_and_rest(rest, "over")?;
            let card = match card.trim() {
                "" => None,
                "_" => Some(HoveredCard::Placeholder),
                name => Some(HoveredCard::City(name.to_string())),
            };
            Command::Dispatch(Msg::DragOver(HoverTarget { list, card }))
        }
        "drop" => Command::Dispatch(Msg::Dropped),
        "end" => Command::Dispatch(Msg::DragEnded),
        "hover" => Command::Dispatch(Msg::CardHovered(city_arg(rest, "hover")?)),
        "leave" => Command::Dispatch(Msg::CardUnhovered(city_arg(rest, "leave")?)),
        "click" => Command::Dispatch(Msg::CardClicked(city_arg(rest, "click")?)),
        "marker" => Command::Dispatch(Msg::MarkerHovered(city_arg(rest, "marker")?)),
        "unmarker" => Command::Dispatch(Msg::MarkerUnhovered(city_arg(rest, "unmarker")?)),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    let value = rest.trim();
    if value.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(value)
    }
}

fn city_arg(rest: &str, command: &'static str) -> Result<String, CommandError> {
    required(rest, command, "a city").map(str::to_string)
}

fn list_and_rest<'a>(
    rest: &'a str,
    command: &'static str,
) -> Result<(ListKind, &'a str), CommandError> {
    let rest = required(rest, command, "a list")?;
    let (raw, tail) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let list = ListKind::parse(raw).ok_or_else(|| CommandError::InvalidList(raw.to_string()))?;
    Ok((list, tail))
}
