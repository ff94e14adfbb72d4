//! Mock analysis generation — stands in for a real parsing + inference
//! backend. Pure over (fixture tables, clock, rng): no I/O, no failure
//! paths. The rng is a parameter rather than an ambient global so tests
//! can seed it and assert exact fixture selection.

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::analysis::fixtures;
use crate::models::analysis::{AnalysisRecord, Education, Project, WorkExperience};

/// Builds a fully populated [`AnalysisRecord`] for `file_name`.
///
/// One persona index drives the identity fields; every other section is an
/// independent uniform draw from its own pool. Rating is uniform in [6, 10].
pub fn mock_analysis<R: Rng + ?Sized>(
    file_name: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> AnalysisRecord {
    let persona = pick(fixtures::PERSONAS, rng);
    let rating = rng.random_range(6..=10);
    let work_experience = pick(fixtures::WORK_EXPERIENCE_VARIANTS, rng)
        .iter()
        .map(|w| WorkExperience {
            role: w.role.to_string(),
            company: w.company.to_string(),
            duration: w.duration.to_string(),
            description: strings(w.description),
        })
        .collect();
    let education = pick(fixtures::EDUCATION_VARIANTS, rng)
        .iter()
        .map(|e| Education {
            degree: e.degree.to_string(),
            institution: e.institution.to_string(),
            graduation_year: e.graduation_year.to_string(),
        })
        .collect();
    let technical_skills = strings(*pick(fixtures::TECHNICAL_SKILLS_POOL, rng));
    let soft_skills = strings(*pick(fixtures::SOFT_SKILLS_POOL, rng));
    let projects = pick(fixtures::PROJECT_VARIANTS, rng)
        .iter()
        .map(|p| Project {
            name: p.name.to_string(),
            description: p.description.to_string(),
            technologies: strings(p.technologies),
        })
        .collect();
    let certifications = strings(*pick(fixtures::CERTIFICATIONS_POOL, rng));
    let improvement_areas = pick(fixtures::IMPROVEMENT_AREAS_POOL, rng).to_string();
    let upskill_suggestions = strings(*pick(fixtures::UPSKILL_SUGGESTIONS_POOL, rng));

    AnalysisRecord {
        id: Uuid::new_v4().to_string(),
        file_name: file_name.to_string(),
        uploaded_at: now,
        name: Some(persona.name.to_string()),
        email: Some(persona.email.to_string()),
        phone: Some(persona.phone.to_string()),
        linkedin_url: Some(format!("https://{}", persona.linkedin)),
        portfolio_url: Some(format!("https://{}", persona.portfolio)),
        summary: Some(persona.summary.to_string()),
        work_experience,
        education,
        technical_skills,
        soft_skills,
        projects,
        certifications,
        resume_rating: rating,
        improvement_areas,
        upskill_suggestions,
    }
}

fn pick<'a, T, R: Rng + ?Sized>(pool: &'a [T], rng: &mut R) -> &'a T {
    &pool[rng.random_range(0..pool.len())]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
