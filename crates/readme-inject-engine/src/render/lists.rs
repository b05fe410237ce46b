use regex::Regex;
use std::sync::OnceLock;

const BULLET_MARKER: &str = "- ";

/// Which list, if any, the scan is currently inside.
///
/// `None` is both the initial and the required final state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListRun {
    #[default]
    None,
    Unordered,
    Ordered,
}

impl ListRun {
    fn open_tag(self) -> Option<&'static str> {
        match self {
            ListRun::None => None,
            ListRun::Unordered => Some("<ul>"),
            ListRun::Ordered => Some("<ol>"),
        }
    }

    fn close_tag(self) -> Option<&'static str> {
        match self {
            ListRun::None => None,
            ListRun::Unordered => Some("</ul>"),
            ListRun::Ordered => Some("</ol>"),
        }
    }

    /// Moves to `next`, emitting the closing tag of the current run and the
    /// opening tag of the new one. Staying in the same state emits nothing.
    pub fn transition(self, next: ListRun, out: &mut Vec<String>) -> ListRun {
        if self != next {
            out.extend(self.close_tag().map(str::to_string));
            out.extend(next.open_tag().map(str::to_string));
        }
        next
    }
}

/// What a single line contributes to the list scan.
#[derive(Debug, PartialEq, Eq)]
enum ListLine<'a> {
    Bullet(&'a str),
    Numbered(&'a str),
    Other,
}

fn classify(line: &str) -> ListLine<'_> {
    static NUMBER_MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
    let number_marker = NUMBER_MARKER_REGEX
        .get_or_init(|| Regex::new(r"^\d+\.\s").expect("Invalid number marker regex"));

    let trimmed = line.trim();
    if let Some(item) = trimmed.strip_prefix(BULLET_MARKER) {
        ListLine::Bullet(item)
    } else if let Some(marker) = number_marker.find(trimmed) {
        ListLine::Numbered(&trimmed[marker.end()..])
    } else {
        ListLine::Other
    }
}

/// Wraps runs of `- ` and `1. ` lines in `<ul>`/`<ol>` with one `<li>` each.
///
/// Item numbers from the source are dropped. Any other line ends the open
/// run and is passed through unchanged; a run still open at the end of the
/// text is closed.
pub fn apply(text: &str) -> String {
    let mut out = Vec::new();
    let mut run = ListRun::None;

    for line in text.split('\n') {
        match classify(line) {
            ListLine::Bullet(item) => {
                run = run.transition(ListRun::Unordered, &mut out);
                out.push(format!("<li>{item}</li>"));
            }
            ListLine::Numbered(item) => {
                run = run.transition(ListRun::Ordered, &mut out);
                out.push(format!("<li>{item}</li>"));
            }
            ListLine::Other => {
                run = run.transition(ListRun::None, &mut out);
                out.push(line.to_string());
            }
        }
    }
    run.transition(ListRun::None, &mut out);

    out.join("\n")
}
