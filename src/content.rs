//! Journal entry formatting.
//!
//! A journal entry is HTML with life-log references embedded between `[[`
//! and `]]`, e.g. `<p>Lunch</p>[[ate|2]]<p>Later...</p>`. Formatting splits
//! the entry into [`Block`]s: HTML passages with their footnote markers
//! linked up, and life-log records resolved against the entry's side data.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{SEGMENT_CLOSE, SEGMENT_FIELD_SEPARATOR, SEGMENT_OPEN};

static FOOTNOTE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<sup>\[[0-9]+\]</sup>").expect("footnote pattern compiles"));

/// What kind of content a raw string holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Journal,
    Other,
}

impl From<&str> for ContentKind {
    fn from(kind: &str) -> Self {
        match kind {
            "journal" => Self::Journal,
            _ => Self::Other,
        }
    }
}

/// Side data a journal entry's life-log segments point into.
///
/// Segments use 1-based indices: `ate|1` is `food[0]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalData<F, C> {
    #[serde(default = "Vec::new")]
    pub food: Vec<F>,
    #[serde(default = "Vec::new")]
    pub checkins: Vec<C>,
}

impl<F, C> Default for JournalData<F, C> {
    fn default() -> Self {
        Self {
            food: Vec::new(),
            checkins: Vec::new(),
        }
    }
}

/// One piece of a formatted journal entry.
///
/// Life-log variants hold `None` when their index does not point at an
/// existing side-data item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Block<F, C> {
    /// HTML passage, footnotes already linked
    Copy(String),
    Ate(Option<F>),
    Drank(Option<F>),
    Event(Option<C>),
    Travel(Option<C>),
    Visit(Option<C>),
    /// Non-HTML segment with no recognised verb, passed through as written
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Formatted<F, C> {
    Raw(String),
    Blocks(Vec<Block<F, C>>),
}

/// Formats raw content according to its kind.
///
/// Journal content is split into blocks; anything else is returned as is.
/// Without side data, life-log records are still emitted with `None` data.
pub fn format_content<F: Clone, C: Clone>(
    raw: &str,
    kind: ContentKind,
    data: Option<&JournalData<F, C>>,
) -> Formatted<F, C> {
    match kind {
        ContentKind::Journal => Formatted::Blocks(format_journal(raw, data)),
        ContentKind::Other => Formatted::Raw(raw.to_owned()),
    }
}

fn format_journal<F: Clone, C: Clone>(
    raw: &str,
    data: Option<&JournalData<F, C>>,
) -> Vec<Block<F, C>> {
    let normalized = raw
        .replace(SEGMENT_CLOSE, SEGMENT_OPEN)
        .replace(&format!("<p>{SEGMENT_OPEN} "), SEGMENT_OPEN)
        .replace(&format!(" {SEGMENT_OPEN}</p>"), SEGMENT_OPEN);

    let (blocks, footnotes) = normalized.split(SEGMENT_OPEN).fold(
        (Vec::new(), 0),
        |(mut blocks, footnotes), segment| {
            if segment.starts_with('<') {
                let (html, footnotes) = render_footnotes(segment, footnotes);
                blocks.push(Block::Copy(html));
                return (blocks, footnotes);
            }
            if let Some(block) = life_log_block(segment, data) {
                blocks.push(block);
            }
            (blocks, footnotes)
        },
    );

    debug!(blocks = blocks.len(), footnotes, "formatted journal entry");
    blocks
}

/// Rewrites `<sup>[N]</sup>` markers into linked reference anchors.
///
/// Markers are renumbered from `start + 1` in order of appearance, ignoring
/// the number written in the source. Returns the rendered HTML and the last
/// number used, which is `start` if there were no markers.
pub fn render_footnotes(html: &str, start: usize) -> (String, usize) {
    let mut count = start;
    let rendered = FOOTNOTE_PATTERN
        .replace_all(html, |_: &Captures<'_>| {
            count += 1;
            format!(r##"<sup id="reference{count}"><a href="#footnote{count}">[{count}]</a></sup>"##)
        })
        .into_owned();
    (rendered, count)
}

fn life_log_block<F: Clone, C: Clone>(
    segment: &str,
    data: Option<&JournalData<F, C>>,
) -> Option<Block<F, C>> {
    let compact: String = segment.chars().filter(|c| !c.is_whitespace()).collect();
    let mut fields = compact.split(SEGMENT_FIELD_SEPARATOR);
    let verb = fields.next().unwrap_or_default();
    let index = fields.next();

    let food = || side_item(data.map(|data| data.food.as_slice()), index);
    let checkin = || side_item(data.map(|data| data.checkins.as_slice()), index);

    match verb {
        "ate" => Some(Block::Ate(food())),
        "drank" => Some(Block::Drank(food())),
        "attended" => Some(Block::Event(checkin())),
        "travelled" | "traveled" => Some(Block::Travel(checkin())),
        "visited" => Some(Block::Visit(checkin())),
        _ if segment.trim().is_empty() => None,
        _ => {
            debug!(segment, "unrecognised journal segment");
            Some(Block::Unknown(segment.to_owned()))
        }
    }
}

fn side_item<T: Clone>(items: Option<&[T]>, index: Option<&str>) -> Option<T> {
    let position = index?.parse::<usize>().ok()?.checked_sub(1)?;
    items?.get(position).cloned()
}
