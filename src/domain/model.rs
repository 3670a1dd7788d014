use crate::utils::error::{PortfolioError, Result};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub photo: String,
    /// Markdown
    pub bio: String,
    pub email: String,
    /// Host-relative handle, e.g. `github.com/alexjohnson`
    pub github: String,
    pub linkedin: String,
    pub education: Vec<Education>,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn github_url(&self) -> String {
        format!("https://{}", self.github)
    }

    pub fn linkedin_url(&self) -> String {
        format!("https://{}", self.linkedin)
    }
}

/// Category name -> skill names, kept in display order.
pub type SkillCategories = IndexMap<String, Vec<String>>;

/// Competency scores for the radar chart. Every value is within `[0, 1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillRatings(IndexMap<String, f64>);

impl SkillRatings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, skill: impl Into<String>, value: f64) -> Result<()> {
        let skill = skill.into();
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(PortfolioError::InvalidRating { skill, value });
        }
        self.0.insert(skill, value);
        Ok(())
    }

    pub fn try_from_pairs<I, K>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut ratings = Self::new();
        for (skill, value) in pairs {
            ratings.insert(skill, value)?;
        }
        Ok(ratings)
    }

    pub fn get(&self, skill: &str) -> Option<f64> {
        self.0.get(skill).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for SkillRatings {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = IndexMap::<String, f64>::deserialize(deserializer)?;
        SkillRatings::try_from_pairs(raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: String,
    pub repository: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub skills: SkillCategories,
    pub ratings: SkillRatings,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
}

impl PortfolioContent {
    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }
}

/// An accepted contact form submission, handed to a `MessageSink`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratings_reject_out_of_range() {
        let mut ratings = SkillRatings::new();
        assert!(ratings.insert("Python", 0.95).is_ok());
        assert!(ratings.insert("Rust", 1.2).is_err());
        assert!(ratings.insert("Go", -0.1).is_err());
        assert!(ratings.insert("NaN", f64::NAN).is_err());
        assert_eq!(ratings.len(), 1);
    }

    #[test]
    fn test_ratings_keep_insertion_order() {
        let ratings =
            SkillRatings::try_from_pairs([("b", 0.1), ("a", 0.2), ("c", 0.3)]).unwrap();
        let keys: Vec<&str> = ratings.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_ratings_deserialize_validates() {
        let ok: SkillRatings = serde_json::from_str(r#"{"NLP": 0.85}"#).unwrap();
        assert_eq!(ok.get("NLP"), Some(0.85));

        let bad = serde_json::from_str::<SkillRatings>(r#"{"NLP": 3.0}"#);
        assert!(bad.is_err());
    }
}
