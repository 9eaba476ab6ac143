// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Keyword occurrence scoring

use serde::{Deserialize, Serialize};

use crate::taxonomy::Taxonomy;

/// Match count for a single role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleScore {
    pub role: String,
    pub score: usize,
}

/// Per-role match counts, in taxonomy order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreMap {
    entries: Vec<RoleScore>,
}

impl ScoreMap {
    /// Score for a role; roles not present count as zero
    pub fn get(&self, role: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.role == role)
            .map(|e| e.score)
            .unwrap_or(0)
    }

    /// Highest-scoring role, first in order on ties. `None` if nothing scored.
    pub fn best(&self) -> Option<&RoleScore> {
        let mut best: Option<&RoleScore> = None;
        for entry in &self.entries {
            if entry.score == 0 {
                continue;
            }
            if best.map_or(true, |b| entry.score > b.score) {
                best = Some(entry);
            }
        }
        best
    }

    /// True when no role scored above zero
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.score == 0)
    }

    /// Roles with a non-zero score, highest first
    pub fn ranked(&self) -> Vec<&RoleScore> {
        let mut hits: Vec<&RoleScore> = self.entries.iter().filter(|e| e.score > 0).collect();
        // stable sort keeps taxonomy order among equals
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits
    }
}

/// Count whole-word keyword hits for every role in `text`
pub fn score(text: &str, taxonomy: &Taxonomy) -> ScoreMap {
    let text_lower = text.to_lowercase();

    let entries = taxonomy
        .roles()
        .iter()
        .map(|role| RoleScore {
            role: role.name().to_string(),
            score: role.keywords().iter().map(|k| k.count_in(&text_lower)).sum(),
        })
        .collect();

    ScoreMap { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_taxonomy() -> Taxonomy {
        Taxonomy::from_table(vec![
            ("GoLang", vec!["go", "goroutine"]),
            ("Python", vec!["python", "django"]),
            ("Fullstack", vec!["full stack", "python"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_score_is_deterministic() {
        let taxonomy = Taxonomy::builtin().unwrap();
        let text = "Senior Python developer. Django, Docker, Kubernetes and AWS. Go and React.";
        assert_eq!(score(text, &taxonomy), score(text, &taxonomy));
    }

    #[test]
    fn test_golang_does_not_count_as_go() {
        let taxonomy = small_taxonomy();
        assert_eq!(score("golang going gopher", &taxonomy).get("GoLang"), 0);
        assert_eq!(score("I write Go daily", &taxonomy).get("GoLang"), 1);
    }

    #[test]
    fn test_case_insensitive_and_summed() {
        let taxonomy = small_taxonomy();
        let scores = score("PYTHON, Django and python again", &taxonomy);
        assert_eq!(scores.get("Python"), 3);
        assert_eq!(scores.get("Fullstack"), 2);
    }

    #[test]
    fn test_missing_role_reads_zero() {
        let scores = score("anything", &small_taxonomy());
        assert_eq!(scores.get("Cobol"), 0);
        assert!(scores.is_empty());
        assert!(scores.best().is_none());
    }

    #[test]
    fn test_tie_goes_to_first_role() {
        let taxonomy = small_taxonomy();
        // Python and Fullstack both score 1
        let scores = score("python", &taxonomy);
        let best = scores.best().unwrap();
        assert_eq!(best.role, "Python");
        assert_eq!(best.score, 1);
    }

    #[test]
    fn test_ranked_orders_by_score() {
        let taxonomy = small_taxonomy();
        let scores = score("full stack full stack python go", &taxonomy);
        let ranked: Vec<&str> = scores.ranked().iter().map(|r| r.role.as_str()).collect();
        assert_eq!(ranked, vec!["Fullstack", "GoLang", "Python"]);
    }
}
