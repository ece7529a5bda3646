//! Read-only course catalog shown on the main screen.
//!
//! The built-in sample is embedded at compile time. `catalog_file` in the
//! config replaces it with a JSON file of the same shape.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;

fn sample_catalog_json() -> &'static str {
    include_str!("../assets/catalog.json")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    /// Percent complete, 0-100.
    pub progress: u8,
    /// Number of lessons in the course.
    pub lessons: u32,
    pub description: String,
    pub category: String,
    pub instructor: String,
    pub rating: f32,
    /// Enrolled students.
    pub students: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub completed: bool,
    pub description: String,
    #[serde(default)]
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub progress: u8,
    #[serde(default)]
    pub courses: Vec<String>,
    pub join_date: NaiveDate,
}

impl Student {
    /// Join date as shown in lists, e.g. "Jan 15, 2024".
    pub fn joined_label(&self) -> String {
        self.join_date.format("%b %-d, %Y").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileStats {
    pub courses: u32,
    pub hours: u32,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl Achievement {
    /// Terminal glyph for the icon name.
    pub fn glyph(&self) -> &'static str {
        match self.icon.as_str() {
            "rocket" => "🚀",
            "star" => "★",
            "sunny" => "☀",
            _ => "●",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    CourseCompleted,
    QuizTaken,
    CertificateEarned,
    #[serde(other)]
    Other,
}

impl ActivityKind {
    pub fn glyph(self) -> &'static str {
        match self {
            ActivityKind::CourseCompleted => "✓",
            ActivityKind::QuizTaken => "✎",
            ActivityKind::CertificateEarned => "✦",
            ActivityKind::Other => "•",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub timestamp: NaiveDateTime,
}

impl Activity {
    pub fn when_label(&self) -> String {
        self.timestamp.format("%b %-d, %Y %H:%M").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub stats: ProfileStats,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub recent_activity: Vec<Activity>,
}

/// Figures shown on the dashboard stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub courses: usize,
    pub completed_lessons: usize,
    /// Mean course progress, rounded to the nearest percent.
    pub average_progress: u8,
}

/// All static content rendered by the presentation views.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub courses: Vec<Course>,
    /// Lesson list shared by every course.
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub profile: Profile,
}

impl Catalog {
    /// The embedded sample catalog.
    ///
    /// # Errors
    /// Only fails if the embedded asset is malformed.
    pub fn sample() -> Result<Self> {
        Self::from_json(sample_catalog_json()).context("Failed to parse built-in catalog")
    }

    /// Loads the catalog named by `config.catalog_file`, or the sample.
    ///
    /// # Errors
    /// Returns an error if the override file cannot be read or parsed.
    pub fn load(config: &Config) -> Result<Self> {
        match config.catalog_file.as_deref() {
            Some(path) => Self::load_from(Path::new(path)),
            None => Self::sample(),
        }
    }

    /// Loads a catalog from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog from {}", path.display()))?;
        let catalog = Self::from_json(&contents)
            .with_context(|| format!("Failed to parse catalog from {}", path.display()))?;
        debug!(
            path = %path.display(),
            courses = catalog.courses.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn find_course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    /// Lessons for a course. Every course currently shares one lesson list;
    /// unknown ids get none.
    pub fn lessons_for(&self, course_id: &str) -> &[Lesson] {
        if self.find_course(course_id).is_some() {
            &self.lessons
        } else {
            &[]
        }
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        let average_progress = if self.courses.is_empty() {
            0
        } else {
            let total: u32 = self.courses.iter().map(|c| u32::from(c.progress)).sum();
            let count = self.courses.len() as u32;
            ((total + count / 2) / count).min(100) as u8
        };

        DashboardStats {
            courses: self.courses.len(),
            completed_lessons: self.lessons.iter().filter(|l| l.completed).count(),
            average_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_sample_catalog_parses() {
        let catalog = Catalog::sample().unwrap();

        assert_eq!(catalog.courses.len(), 4);
        assert_eq!(catalog.lessons.len(), 4);
        assert_eq!(catalog.students.len(), 5);
        assert_eq!(catalog.profile.stats.hours, 120);
        assert_eq!(catalog.profile.achievements[0].glyph(), "🚀");
        assert_eq!(
            catalog.profile.recent_activity[1].kind,
            ActivityKind::QuizTaken
        );
    }

    #[test]
    fn test_lessons_for_known_and_unknown_course() {
        let catalog = Catalog::sample().unwrap();

        assert_eq!(catalog.lessons_for("3").len(), 4);
        assert_eq!(catalog.lessons_for("3")[0].title, "Introduction to Algebra");
        assert!(catalog.lessons_for("99").is_empty());
        assert_eq!(catalog.find_course("4").unwrap().title, "History");
    }

    #[test]
    fn test_dashboard_stats() {
        let catalog = Catalog::sample().unwrap();

        // (75 + 60 + 90 + 45) / 4 = 67.5
        assert_eq!(
            catalog.dashboard_stats(),
            DashboardStats {
                courses: 4,
                completed_lessons: 2,
                average_progress: 68,
            }
        );
        assert_eq!(Catalog::default().dashboard_stats(), DashboardStats::default());
    }

    #[test]
    fn test_date_labels() {
        let catalog = Catalog::sample().unwrap();

        assert_eq!(catalog.students[0].joined_label(), "Jan 15, 2024");
        assert_eq!(
            catalog.profile.recent_activity[0].when_label(),
            "Mar 15, 2024 10:30"
        );
    }

    #[test]
    fn test_load_uses_override_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{"courses":[{"id":"9","title":"Art","progress":10,"lessons":3,
               "description":"d","category":"c","instructor":"i","rating":4.0,"students":1}],
               "profile":{"recent_activity":[{"id":"1","type":"badge","title":"t",
               "timestamp":"2024-01-01T00:00:00"}]}}"#,
        )
        .unwrap();
        let config = Config {
            catalog_file: Some(path.display().to_string()),
            ..Config::default()
        };

        let catalog = Catalog::load(&config).unwrap();

        assert_eq!(catalog.courses[0].title, "Art");
        assert!(catalog.students.is_empty());
        assert_eq!(catalog.profile.recent_activity[0].kind, ActivityKind::Other);
    }

    #[test]
    fn test_load_bad_override_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Catalog::load_from(&path).unwrap_err();

        assert!(format!("{err:#}").contains("Failed to parse catalog"));
        assert!(Catalog::load_from(&dir.path().join("missing.json")).is_err());
    }
}
