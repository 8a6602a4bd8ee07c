/// TVmaze API response types for deserialization.
///
/// These structures mirror the JSON response format of the TVmaze API and
/// are converted into the domain structures at the module boundary.
use super::{Episode, Show, ShowId};
use serde::Deserialize;

/// One entry of the search response; the show sits inside a wrapper
/// that also carries a relevance score we do not use.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchResult {
    pub show: TvMazeShow,
}

/// A show as returned by the TVmaze API.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    pub id: u64,
    pub name: String,
    /// Show type, e.g. "Scripted" (may be null)
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub premiered: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub image: Option<TvMazeImage>,
    /// Summary in HTML format (may be null)
    pub summary: Option<String>,
}

/// Image references attached to shows and episodes.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    pub medium: String,
}

/// A single episode from the TVmaze API.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
    /// Season number (0 for specials)
    pub season: u64,
    pub image: Option<TvMazeImage>,
    /// Episode summary in HTML format (may be null)
    pub summary: Option<String>,
}

impl From<TvMazeShow> for Show {
    fn from(show: TvMazeShow) -> Self {
        Self {
            id: ShowId(show.id),
            name: show.name,
            image: show.image.map(|i| i.medium),
            summary: show.summary,
            premiered: show.premiered,
            status: show.status,
            kind: show.kind,
            genres: show.genres,
        }
    }
}

impl From<TvMazeEpisode> for Episode {
    fn from(episode: TvMazeEpisode) -> Self {
        Self {
            name: episode.name.unwrap_or_else(|| "Unknown".to_string()),
            season: episode.season,
            image: episode.image.map(|i| i.medium),
            summary: episode.summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_search_result() {
        let json = r#"[
            {
                "score": 0.9,
                "show": {
                    "id": 169,
                    "name": "Breaking Bad",
                    "type": "Scripted",
                    "genres": ["Drama", "Crime", "Thriller"],
                    "status": "Ended",
                    "premiered": "2008-01-20",
                    "image": { "medium": "https://example.org/bb-med.jpg", "original": "https://example.org/bb.jpg" },
                    "summary": "<p>A chemistry teacher.</p>"
                }
            }
        ]"#;

        let results: Vec<TvMazeSearchResult> = serde_json::from_str(json).unwrap();
        assert_eq!(results.len(), 1);

        let show: Show = results.into_iter().next().unwrap().show.into();
        assert_eq!(show.id, ShowId(169));
        assert_eq!(show.name, "Breaking Bad");
        assert_eq!(show.kind.as_deref(), Some("Scripted"));
        assert_eq!(show.image.as_deref(), Some("https://example.org/bb-med.jpg"));
        assert_eq!(show.genres, vec!["Drama", "Crime", "Thriller"]);
    }

    #[test]
    fn test_deserialize_show_with_null_fields() {
        let json = r#"{
            "id": 7,
            "name": "Obscure Pilot",
            "type": null,
            "premiered": null,
            "status": null,
            "image": null,
            "summary": null
        }"#;

        let show: Show = serde_json::from_str::<TvMazeShow>(json).unwrap().into();
        assert_eq!(show.name, "Obscure Pilot");
        assert!(show.image.is_none());
        assert!(show.summary.is_none());
        assert!(show.genres.is_empty());
    }

    #[test]
    fn test_deserialize_episode_without_name() {
        let json = r#"{ "name": null, "season": 2, "image": null, "summary": null }"#;

        let episode: Episode = serde_json::from_str::<TvMazeEpisode>(json).unwrap().into();
        assert_eq!(episode.name, "Unknown");
        assert_eq!(episode.season, 2);
    }
}
