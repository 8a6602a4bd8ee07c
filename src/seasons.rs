//! Season grouping for episode lists.
//!
//! Episodes arrive from the catalog as one flat, ordered list. For display
//! they are partitioned by season, preserving the first-seen order of
//! seasons and the input order of episodes within a season.
use crate::catalog::Episode;

/// Episodes of a single season, labelled by the season identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonGroup {
    /// Season identifier as displayed (the season number, stringified)
    pub label: String,
    /// Episodes of this season, in input order
    pub episodes: Vec<Episode>,
}

impl SeasonGroup {
    /// Whether this season's block starts out expanded.
    ///
    /// Only the season labelled exactly "1" is expanded by default. This is
    /// a literal string comparison, not a numeric rule.
    pub fn expanded_by_default(&self) -> bool {
        self.label == "1"
    }
}

/// Partitions episodes by season.
///
/// Seasons appear in the order of their first episode in the input; episodes
/// keep their input order within each season.
pub fn group_by_season(episodes: &[Episode]) -> Vec<SeasonGroup> {
    let mut groups: Vec<SeasonGroup> = Vec::new();

    for episode in episodes {
        let label = episode.season.to_string();

        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.episodes.push(episode.clone()),
            None => groups.push(SeasonGroup {
                label,
                episodes: vec![episode.clone()],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(name: &str, season: u64) -> Episode {
        Episode {
            name: name.to_string(),
            season,
            image: None,
            summary: None,
        }
    }

    #[test]
    fn test_groups_preserve_first_seen_season_order() {
        let episodes = vec![episode("A", 1), episode("B", 1), episode("C", 2)];

        let groups = group_by_season(&episodes);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "1");
        assert_eq!(groups[0].episodes[0].name, "A");
        assert_eq!(groups[0].episodes[1].name, "B");
        assert_eq!(groups[1].label, "2");
        assert_eq!(groups[1].episodes[0].name, "C");
    }

    #[test]
    fn test_non_contiguous_seasons_keep_input_order() {
        // Specials (season 0) interleaved with regular seasons
        let episodes = vec![episode("X", 3), episode("Y", 0), episode("Z", 3)];

        let groups = group_by_season(&episodes);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "3");
        assert_eq!(groups[0].episodes.len(), 2);
        assert_eq!(groups[1].label, "0");
    }

    #[test]
    fn test_only_season_one_is_expanded_by_default() {
        let episodes = vec![episode("A", 1), episode("C", 2), episode("S", 0)];

        let groups = group_by_season(&episodes);

        assert!(groups[0].expanded_by_default());
        assert!(!groups[1].expanded_by_default());
        assert!(!groups[2].expanded_by_default());
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        assert!(group_by_season(&[]).is_empty());
    }
}
