//! Typed view models for the list and detail presentations.
//!
//! Pure rendering over records: no state of their own. The detail view
//! omits absent optional fields from the JSON instead of emitting blanks,
//! and an empty history renders an explicit empty-state payload rather
//! than a zero-row table.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::analysis::{AnalysisRecord, Education, Project, WorkExperience};

/// Visual emphasis bucket for a rating. Presentation-only — never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingSeverity {
    Good,
    Moderate,
    Poor,
}

pub fn rating_severity(rating: u8) -> RatingSeverity {
    if rating >= 8 {
        RatingSeverity::Good
    } else if rating >= 6 {
        RatingSeverity::Moderate
    } else {
        RatingSeverity::Poor
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HistoryListView {
    Empty {
        title: String,
        hint: String,
    },
    Table {
        rows: Vec<HistoryRow>,
        total: usize,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryRow {
    pub id: String,
    pub file_name: String,
    pub candidate_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_email: Option<String>,
    pub rating_label: String,
    pub severity: RatingSeverity,
    pub uploaded_at: String,
}

impl HistoryListView {
    pub fn from_records(records: &[AnalysisRecord]) -> Self {
        if records.is_empty() {
            return HistoryListView::Empty {
                title: "No analyses yet".to_string(),
                hint: "Upload your first resume to start building your analysis history."
                    .to_string(),
            };
        }
        let rows = records
            .iter()
            .map(|r| HistoryRow {
                id: r.id.clone(),
                file_name: r.file_name.clone(),
                candidate_name: r
                    .name
                    .clone()
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| "Unknown".to_string()),
                candidate_email: non_empty(&r.email),
                rating_label: format!("{}/10", r.resume_rating),
                severity: rating_severity(r.resume_rating),
                uploaded_at: format_upload_date(r.uploaded_at),
            })
            .collect::<Vec<_>>();
        let total = rows.len();
        HistoryListView::Table { rows, total }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisDetailView {
    pub id: String,
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub work_experience: Vec<WorkExperience>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub education: Vec<Education>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub technical_skills: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub soft_skills: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<Project>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<String>,
    pub resume_rating: u8,
    pub rating_severity: RatingSeverity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvement_areas: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub upskill_suggestions: Vec<String>,
}

impl AnalysisDetailView {
    pub fn from_record(record: &AnalysisRecord) -> Self {
        Self {
            id: record.id.clone(),
            file_name: record.file_name.clone(),
            uploaded_at: record.uploaded_at,
            name: non_empty(&record.name),
            email: non_empty(&record.email),
            phone: non_empty(&record.phone),
            linkedin_url: non_empty(&record.linkedin_url),
            portfolio_url: non_empty(&record.portfolio_url),
            summary: non_empty(&record.summary),
            work_experience: record.work_experience.clone(),
            education: record.education.clone(),
            technical_skills: record.technical_skills.clone(),
            soft_skills: record.soft_skills.clone(),
            projects: record.projects.clone(),
            certifications: record.certifications.clone(),
            resume_rating: record.resume_rating,
            rating_severity: rating_severity(record.resume_rating),
            improvement_areas: Some(record.improvement_areas.clone())
                .filter(|s| !s.is_empty()),
            upskill_suggestions: record.upskill_suggestions.clone(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|s| !s.is_empty())
}

fn format_upload_date(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}
