//! Rendering of the fixed seven-question playlist report

use crate::domain::track::Track;

const TITLE: &str = "Music Playlist Report";
const NO_DATA: &str = "No data found.";

/// The questions the report answers, restated verbatim as its table of
/// contents.
const QUESTIONS: &[&str] = &[
    "How many songs received 200 or more plays?",
    "How many songs are in the playlist with the genre \"Alternative\"?",
    "How many songs are in the playlist with the Genre of \"Hip-Hop/Rap\"?",
    "What songs are in the playlist from the album \"Welcome to the Fishbowl?\"",
    "What are the songs in the playlist from before 1970?",
    "What are the song names that are more than 85 characters long?",
    "What is the longest song? (longest in Time)",
];

const PLAY_THRESHOLD: i64 = 200;
const YEAR_CUTOFF: i64 = 1970;
const LONG_NAME_CHARS: usize = 85;
const FISHBOWL_ALBUM: &str = "Welcome to the Fishbowl";

/// Accumulates report lines into one owned buffer.
struct ReportBuilder {
    out: String,
}

impl ReportBuilder {
    fn new() -> Self {
        Self { out: String::new() }
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// A labelled list section: one item per line, then the blank
    /// separator every section gets, matched or not.
    fn listing<I, S>(&mut self, label: &str, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.line(label);
        for item in items {
            self.line(item.as_ref());
        }
        self.blank();
    }

    fn count(&mut self, label: &str, n: usize) {
        self.line(&format!("{label}: {n}"));
        self.blank();
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Renders the full report over the loaded tracks.
///
/// Every section is an independent linear pass; nothing is sorted, so
/// listings keep the playlist's row order. String comparisons are exact
/// and case-sensitive.
pub fn render(tracks: &[Track]) -> String {
    let mut report = ReportBuilder::new();
    report.line(TITLE);
    report.blank();

    if tracks.is_empty() {
        report.line(NO_DATA);
        return report.finish();
    }

    for question in QUESTIONS {
        report.line(question);
    }
    report.blank();

    report.listing(
        "Songs that received 200 or more plays:",
        high_play_counts(tracks).iter().map(i64::to_string),
    );
    report.count(
        "Number of Alternative songs",
        genre_count(tracks, "Alternative"),
    );
    report.count(
        "Number of Hip-Hop/Rap songs",
        genre_count(tracks, "Hip-Hop/Rap"),
    );
    report.listing(
        "Songs from the album Welcome to the Fishbowl:",
        album_tracks(tracks, FISHBOWL_ALBUM),
    );
    report.listing("Songs from before 1970:", released_before(tracks, YEAR_CUTOFF));
    report.listing(
        "Song names longer than 85 characters:",
        long_names(tracks, LONG_NAME_CHARS),
    );
    report.listing("Longest song:", longest_tracks(tracks));

    report.finish()
}

/// Play counts of tracks at or above the threshold. The original report
/// listed the counts themselves rather than the song names; kept as-is.
fn high_play_counts(tracks: &[Track]) -> Vec<i64> {
    tracks
        .iter()
        .filter(|t| t.plays >= PLAY_THRESHOLD)
        .map(|t| t.plays)
        .collect()
}

fn genre_count(tracks: &[Track], genre: &str) -> usize {
    tracks.iter().filter(|t| t.genre == genre).count()
}

fn album_tracks<'a>(tracks: &'a [Track], album: &str) -> Vec<&'a str> {
    tracks
        .iter()
        .filter(|t| t.album == album)
        .map(|t| t.name.as_str())
        .collect()
}

fn released_before(tracks: &[Track], year: i64) -> Vec<&str> {
    tracks
        .iter()
        .filter(|t| t.year < year)
        .map(|t| t.name.as_str())
        .collect()
}

fn long_names(tracks: &[Track], chars: usize) -> Vec<&str> {
    tracks
        .iter()
        .filter(|t| t.name.chars().count() > chars)
        .map(|t| t.name.as_str())
        .collect()
}

/// Names of every track tying the maximum duration. Empty only when the
/// input is empty.
fn longest_tracks(tracks: &[Track]) -> Vec<&str> {
    let Some(max) = tracks.iter().map(|t| t.duration).max() else {
        return Vec::new();
    };
    tracks
        .iter()
        .filter(|t| t.duration == max)
        .map(|t| t.name.as_str())
        .collect()
}
