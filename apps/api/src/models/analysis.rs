use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted result of a (simulated) resume analysis.
///
/// Records are immutable after creation: the generator builds one, the
/// history store prepends it, and the only other lifecycle event is an
/// explicit delete. Serialized snake_case, which doubles as the wire format
/// and the persisted-blob format.
///
/// Deserialization is tolerant: every field except `id`, `file_name`,
/// `uploaded_at` and `resume_rating` defaults to empty when absent, so
/// older blobs without newer fields still load (there is no schema version).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: String,
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub portfolio_url: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    /// Display order preserved, duplicates kept as-is.
    #[serde(default)]
    pub technical_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Always within [1, 10]; the mock generator only ever emits [6, 10].
    /// Enforced on deserialization, so an out-of-domain rating in a
    /// hand-edited blob surfaces as a parse failure instead of loading
    /// silently.
    #[serde(deserialize_with = "rating_in_domain")]
    pub resume_rating: u8,
    #[serde(default)]
    pub improvement_areas: String,
    #[serde(default)]
    pub upskill_suggestions: Vec<String>,
}

fn rating_in_domain<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let rating = u8::deserialize(deserializer)?;
    if (1..=10).contains(&rating) {
        Ok(rating)
    } else {
        Err(serde::de::Error::custom(format!(
            "resume_rating {rating} is outside [1, 10]"
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub role: String,
    pub company: String,
    pub duration: String,
    #[serde(default)]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub graduation_year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record_deserializes_with_defaults() {
        let json = r#"{
            "id": "resume_1700000000_abc123",
            "file_name": "cv.pdf",
            "uploaded_at": "2024-01-15T10:30:00Z",
            "resume_rating": 7
        }"#;

        let record: AnalysisRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "resume_1700000000_abc123");
        assert_eq!(record.resume_rating, 7);
        assert!(record.name.is_none());
        assert!(record.work_experience.is_empty());
        assert!(record.technical_skills.is_empty());
        assert_eq!(record.improvement_areas, "");
    }

    #[test]
    fn test_out_of_domain_rating_is_a_parse_failure() {
        for rating in ["0", "11", "200"] {
            let json = format!(
                r#"{{
                    "id": "a1",
                    "file_name": "cv.pdf",
                    "uploaded_at": "2024-01-15T10:30:00Z",
                    "resume_rating": {rating}
                }}"#
            );
            let result: Result<AnalysisRecord, _> = serde_json::from_str(&json);
            assert!(result.is_err(), "rating {rating} must be rejected");
        }
    }

    #[test]
    fn test_boundary_ratings_accepted() {
        for rating in ["1", "10"] {
            let json = format!(
                r#"{{
                    "id": "a1",
                    "file_name": "cv.pdf",
                    "uploaded_at": "2024-01-15T10:30:00Z",
                    "resume_rating": {rating}
                }}"#
            );
            assert!(serde_json::from_str::<AnalysisRecord>(&json).is_ok());
        }
    }

    #[test]
    fn test_wire_format_is_snake_case() {
        let record = AnalysisRecord {
            id: "a1".into(),
            file_name: "cv.pdf".into(),
            uploaded_at: "2024-01-15T10:30:00Z".parse().unwrap(),
            name: Some("John Smith".into()),
            email: None,
            phone: None,
            linkedin_url: Some("https://linkedin.com/in/johnsmith".into()),
            portfolio_url: None,
            summary: None,
            work_experience: vec![],
            education: vec![],
            technical_skills: vec!["React".into()],
            soft_skills: vec![],
            projects: vec![],
            certifications: vec![],
            resume_rating: 9,
            improvement_areas: "Add metrics.".into(),
            upskill_suggestions: vec![],
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["file_name"], "cv.pdf");
        assert_eq!(value["linkedin_url"], "https://linkedin.com/in/johnsmith");
        assert_eq!(value["resume_rating"], 9);
        assert_eq!(value["improvement_areas"], "Add metrics.");
    }

    #[test]
    fn test_duplicate_skills_survive_round_trip() {
        let json = r#"{
            "id": "a2",
            "file_name": "cv.pdf",
            "uploaded_at": "2024-01-15T10:30:00Z",
            "technical_skills": ["SQL", "SQL", "Python"],
            "resume_rating": 6
        }"#;

        let record: AnalysisRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.technical_skills, vec!["SQL", "SQL", "Python"]);
    }
}
