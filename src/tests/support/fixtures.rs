// Hand-built CV entries for route and domain tests.
use chrono::NaiveDate;

use crate::{
    certification::application::domain::CertificationItem,
    education::application::domain::EducationItem,
    experience::application::domain::ExperienceItem,
    profile::application::domain::{ContactInfo, PersonalInfo},
    shared::documents::{DataSourceError, DocumentReadError},
    skills::application::domain::{LanguageSkill, TechnicalSkill, TechnicalSkillCategory},
    training::application::domain::{TrainingItem, YearMonth},
};

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub fn missing_document(location: &str) -> DataSourceError {
    DocumentReadError::Missing {
        location: location.to_string(),
    }
    .into()
}

pub fn education_item(id: u32, start_date: &str) -> EducationItem {
    EducationItem {
        id,
        title: "Computer Engineering".to_string(),
        institution: "Universidad de Sevilla".to_string(),
        location: "Sevilla".to_string(),
        start_date: Some(date(start_date)),
        end_date: None,
        details: "Software track".to_string(),
    }
}

pub fn experience_item(id: u32, start_date: Option<&str>) -> ExperienceItem {
    ExperienceItem {
        id,
        role: "Backend Developer".to_string(),
        company: "Acme Systems".to_string(),
        location: "Madrid".to_string(),
        start_date: start_date.map(date),
        end_date: None,
        current: false,
        summary: "Payments platform".to_string(),
        description: "Built and operated JVM services.".to_string(),
    }
}

pub fn training_item(credential_id: &str, issued: &str) -> TrainingItem {
    TrainingItem {
        id: 1,
        title: "Kubernetes Fundamentals".to_string(),
        provider: "Linux Foundation".to_string(),
        location: "Online".to_string(),
        issued_date: issued.parse::<YearMonth>().unwrap(),
        credential_id: credential_id.to_string(),
        credential_url: None,
        details: "Cluster administration basics".to_string(),
    }
}

pub fn certification_item(id: u32, issue_date: &str) -> CertificationItem {
    CertificationItem {
        id,
        name: "Oracle Certified Professional, Java SE".to_string(),
        issuer: "Oracle".to_string(),
        credential_id: format!("OCP-{id}"),
        credential_url: None,
        issue_date: Some(date(issue_date)),
        expiration_date: None,
        details: "Java language certification".to_string(),
    }
}

pub fn personal_info() -> PersonalInfo {
    PersonalInfo {
        full_name: "Juan Bermudo".to_string(),
        birth_date: date("1990-04-12"),
        nationality: "Spanish".to_string(),
        gender: "Male".to_string(),
    }
}

pub fn contact_info() -> ContactInfo {
    ContactInfo {
        address: "Calle Mayor 1, Madrid".to_string(),
        email: "hello@example.dev".to_string(),
        mobile_phone: "+34 600 000 000".to_string(),
        landline_phone: None,
        website_url: Some("https://example.dev".to_string()),
        linkedin_url: None,
        github_url: Some("https://github.com/example".to_string()),
    }
}

pub fn language_skills() -> Vec<LanguageSkill> {
    vec![
        LanguageSkill {
            id: 2354,
            language: "Spanish".to_string(),
            listening: "C2".to_string(),
            reading: "C2".to_string(),
            spoken_production: "C2".to_string(),
            spoken_interaction: "C2".to_string(),
            writing: "C2".to_string(),
        },
        LanguageSkill {
            id: 8161,
            language: "English".to_string(),
            listening: "C1".to_string(),
            reading: "C1".to_string(),
            spoken_production: "B2".to_string(),
            spoken_interaction: "B2".to_string(),
            writing: "C1".to_string(),
        },
    ]
}

fn technical(id: u32, name: &str, category: TechnicalSkillCategory, years: u32) -> TechnicalSkill {
    TechnicalSkill {
        id,
        name: name.to_string(),
        category,
        skill_experience: years,
    }
}

pub fn technical_skills() -> Vec<TechnicalSkill> {
    use TechnicalSkillCategory::*;

    vec![
        technical(1, "Java", Language, 10),
        technical(2, "Spring Boot", Framework, 5),
        technical(3, "JavaScript", Language, 4),
        technical(4, "Docker", DevOps, 6),
        technical(5, "Rust", Language, 2),
        technical(6, "SonarQube", CodeQuality, 3),
    ]
}
