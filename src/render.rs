//! Renderers that turn catalog data into terminal output.
//!
//! Each renderer is a pure function from domain data to the text that
//! replaces one display section. Remote summaries are HTML-bearing; they
//! pass through a single sanitizing boundary before display and raw HTML
//! is never emitted.
use crate::catalog::{Episode, Show};
use crate::seasons::SeasonGroup;

/// Markers for collapsible blocks, mirroring a disclosure widget.
const MARKER_EXPANDED: &str = "[-]";
const MARKER_COLLAPSED: &str = "[+]";

/// The single point through which remote HTML passes before display.
fn sanitize_summary(summary: Option<&str>) -> String {
    summary
        .map(|html| nanohtml2text::html2text(html).trim().to_string())
        .unwrap_or_default()
}

/// Renders the search result list.
///
/// One entry per show, in the order received (the API's relevance order),
/// each carrying the show's catalog id. An empty result set renders a
/// no-results message embedding the query text.
pub fn render_show_list(shows: &[Show], query: &str) -> String {
    if shows.is_empty() {
        return format!("No results for criteria \"{query}\"\n");
    }

    let mut out = String::new();
    for (index, show) in shows.iter().enumerate() {
        out.push_str(&format!("{:>3}. {} (#{})\n", index + 1, show.name, show.id));
    }
    out
}

/// Renders the show detail section.
///
/// In order: a heading with the show name, the image reference when
/// present, the sanitized summary, and a fixed attribute table with the
/// rows Premiered, Status, Type and Genres. Missing attributes render as
/// the empty string.
pub fn render_show_detail(show: &Show) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", show.name));

    if let Some(image) = &show.image {
        out.push_str(&format!("Image: {image}\n"));
    }

    let summary = sanitize_summary(show.summary.as_deref());
    if !summary.is_empty() {
        out.push_str(&format!("\n{summary}\n"));
    }

    out.push('\n');
    out.push_str(&format!(
        "  Premiered  {}\n",
        show.premiered.as_deref().unwrap_or_default()
    ));
    out.push_str(&format!(
        "  Status     {}\n",
        show.status.as_deref().unwrap_or_default()
    ));
    out.push_str(&format!(
        "  Type       {}\n",
        show.kind.as_deref().unwrap_or_default()
    ));
    out.push_str(&format!("  Genres     {}\n", show.genres.join(", ")));

    out
}

/// Renders the per-season episode section.
///
/// Each season is a collapsible block labelled with its season identifier.
/// Only the default-expanded season lists its episodes, each as a collapsed
/// sub-block showing the episode name; collapsed seasons show the label and
/// episode count only.
pub fn render_seasons(seasons: &[SeasonGroup]) -> String {
    let mut out = String::new();

    for season in seasons {
        let expanded = season.expanded_by_default();
        let marker = if expanded {
            MARKER_EXPANDED
        } else {
            MARKER_COLLAPSED
        };

        out.push_str(&format!(
            "{marker} Season {} ({} episodes)\n",
            season.label,
            season.episodes.len()
        ));

        if expanded {
            for episode in &season.episodes {
                out.push_str(&format!("    {MARKER_COLLAPSED} {}\n", episode.name));
            }
        }
    }

    out
}

/// Renders a single expanded episode: name, optional image reference and
/// the sanitized summary.
pub fn render_episode(episode: &Episode) -> String {
    let mut out = String::new();

    out.push_str(&format!("--- {} ---\n", episode.name));

    if let Some(image) = &episode.image {
        out.push_str(&format!("Image: {image}\n"));
    }

    let summary = sanitize_summary(episode.summary.as_deref());
    if !summary.is_empty() {
        out.push_str(&format!("{summary}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ShowId;
    use crate::seasons::group_by_season;

    fn show(id: u64, name: &str) -> Show {
        Show {
            id: ShowId(id),
            name: name.to_string(),
            image: None,
            summary: None,
            premiered: None,
            status: None,
            kind: None,
            genres: Vec::new(),
        }
    }

    fn episode(name: &str, season: u64) -> Episode {
        Episode {
            name: name.to_string(),
            season,
            image: None,
            summary: None,
        }
    }

    #[test]
    fn test_show_list_renders_one_entry_per_show_in_order() {
        let shows = vec![show(1, "First"), show(2, "Second"), show(3, "Third")];

        let rendered = render_show_list(&shows, "irrelevant");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("First"));
        assert!(lines[0].contains("#1"));
        assert!(lines[1].contains("Second"));
        assert!(lines[2].contains("Third"));
    }

    #[test]
    fn test_empty_show_list_renders_no_results_message() {
        let rendered = render_show_list(&[], "bad wolf");

        assert_eq!(rendered, "No results for criteria \"bad wolf\"\n");
    }

    #[test]
    fn test_detail_renders_genres_joined_with_comma() {
        let mut s = show(169, "Breaking Bad");
        s.genres = vec!["Drama".to_string(), "Crime".to_string()];

        let rendered = render_show_detail(&s);

        assert!(rendered.contains("Genres     Drama, Crime"));
    }

    #[test]
    fn test_detail_renders_missing_attributes_as_empty() {
        let rendered = render_show_detail(&show(7, "Obscure Pilot"));

        assert!(rendered.contains("=== Obscure Pilot ==="));
        assert!(!rendered.contains("Image:"));
        assert!(rendered.lines().any(|l| l.trim() == "Premiered"));
        assert!(rendered.lines().any(|l| l.trim() == "Status"));
    }

    #[test]
    fn test_detail_strips_html_from_summary() {
        let mut s = show(169, "Breaking Bad");
        s.summary = Some("<p>A <b>chemistry</b> teacher.</p>".to_string());

        let rendered = render_show_detail(&s);

        assert!(rendered.contains("A chemistry teacher."));
        assert!(!rendered.contains("<p>"));
        assert!(!rendered.contains("<b>"));
    }

    #[test]
    fn test_seasons_expand_only_season_one() {
        let episodes = vec![episode("A", 1), episode("B", 1), episode("C", 2)];
        let seasons = group_by_season(&episodes);

        let rendered = render_seasons(&seasons);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "[-] Season 1 (2 episodes)");
        assert!(lines[1].contains("A"));
        assert!(lines[2].contains("B"));
        assert_eq!(lines[3], "[+] Season 2 (1 episodes)");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_episode_renders_image_and_sanitized_summary() {
        let mut e = episode("Pilot", 1);
        e.image = Some("https://example.org/pilot.jpg".to_string());
        e.summary = Some("<p>It begins.</p>".to_string());

        let rendered = render_episode(&e);

        assert!(rendered.contains("--- Pilot ---"));
        assert!(rendered.contains("Image: https://example.org/pilot.jpg"));
        assert!(rendered.contains("It begins."));
        assert!(!rendered.contains("<p>"));
    }
}
