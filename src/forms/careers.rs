use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{is_blank, is_valid_email, is_web_url, FieldErrors};

pub const POSITIONS: &[&str] = &[
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "UI/UX Designer",
    "Project Manager",
    "DevOps Engineer",
    "Data Scientist",
    "Product Manager",
    "Other",
];

/// Experience brackets as (form value, label).
pub const EXPERIENCE_BRACKETS: &[(&str, &str)] = &[
    ("0-1", "0-1 years"),
    ("1-3", "1-3 years"),
    ("3-5", "3-5 years"),
    ("5-10", "5-10 years"),
    ("10+", "10+ years"),
];

const RESUME_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

pub const CONSENT_REQUIRED: &str = "Please agree to the terms and conditions";
pub const FIELDS_REQUIRED: &str = "Please fill in all required fields";
pub const SUBMISSION_FAILED: &str = "Submission failed. Please try again.";

/// The careers form exactly as the browser posts it.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApplicationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub resume: String,
    /// Previously chosen resume file name; file inputs cannot be pre-filled.
    pub resume_name: String,
    pub notice_period: String,
    pub cover_letter: String,
    /// Comma-joined tags carried in a hidden input.
    pub skills: String,
    pub current_skill: String,
    pub experience: String,
    pub linkedin_url: String,
    pub portfolio_url: String,
    pub agreed_to_terms: Option<String>,
    pub action: Option<String>,
    pub remove_skill: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CareersAction {
    AddSkill,
    RemoveSkill(String),
    Submit,
}

impl ApplicationForm {
    pub fn into_parts(self) -> (Application, CareersAction) {
        let action = match (self.remove_skill, self.action.as_deref()) {
            (Some(tag), _) => CareersAction::RemoveSkill(tag),
            (None, Some("add_skill")) => CareersAction::AddSkill,
            _ => CareersAction::Submit,
        };
        let mut application = Application {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            position: self.position,
            resume: if is_blank(&self.resume) {
                self.resume_name
            } else {
                self.resume
            },
            notice_period: self.notice_period,
            cover_letter: self.cover_letter,
            skills: Vec::new(),
            current_skill: self.current_skill,
            experience: self.experience,
            linkedin_url: self.linkedin_url,
            portfolio_url: self.portfolio_url,
            agreed_to_terms: self.agreed_to_terms.is_some(),
        };
        for tag in self.skills.split(',') {
            application.push_skill(tag);
        }
        (application, action)
    }
}

/// Job application state, re-rendered on every round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Application {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    /// File name of the uploaded resume.
    pub resume: String,
    /// Raw `YYYY-MM-DD` value from the date input.
    pub notice_period: String,
    pub cover_letter: String,
    pub skills: Vec<String>,
    #[serde(skip)]
    pub current_skill: String,
    pub experience: String,
    pub linkedin_url: String,
    pub portfolio_url: String,
    pub agreed_to_terms: bool,
}

/// Why a submit was refused: a banner message plus per-field details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub message: &'static str,
    pub errors: FieldErrors,
}

impl Application {
    pub fn apply(&mut self, action: &CareersAction) {
        match action {
            CareersAction::AddSkill => self.add_skill(),
            CareersAction::RemoveSkill(tag) => self.remove_skill(tag),
            CareersAction::Submit => {}
        }
    }

    /// Moves the pending skill input into the tag list. Commas separate tags.
    pub fn add_skill(&mut self) {
        let pending = std::mem::take(&mut self.current_skill);
        for tag in pending.split(',') {
            self.push_skill(tag);
        }
    }

    fn push_skill(&mut self, tag: &str) {
        let tag = tag.trim();
        if !tag.is_empty() && !self.skills.iter().any(|s| s == tag) {
            self.skills.push(tag.to_string());
        }
    }

    pub fn remove_skill(&mut self, tag: &str) {
        self.skills.retain(|s| s != tag);
    }

    pub fn skills_joined(&self) -> String {
        self.skills.join(",")
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    pub fn notice_period_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.notice_period.trim(), "%Y-%m-%d").ok()
    }

    pub fn notice_period_display(&self) -> Option<String> {
        self.notice_period_date()
            .map(|date| date.format("%B %-d, %Y").to_string())
    }

    pub fn is_position(&self, position: &str) -> bool {
        self.position == position
    }

    pub fn is_experience(&self, bracket: &str) -> bool {
        self.experience == bracket
    }

    /// Mirrors the submit button's enabled state.
    pub fn is_complete(&self) -> bool {
        self.missing_required().next().is_none() && self.agreed_to_terms
    }

    fn missing_required(&self) -> impl Iterator<Item = &'static str> + '_ {
        [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("position", &self.position),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(field, _)| field)
    }

    pub fn validate(&self) -> Result<(), Rejection> {
        let mut errors = FieldErrors::new();

        if !self.agreed_to_terms {
            errors.insert("agreed_to_terms", CONSENT_REQUIRED);
        }
        for field in self.missing_required() {
            errors.insert(field, "This field is required");
        }
        if !is_blank(&self.email) && !is_valid_email(&self.email) {
            errors.insert("email", "Please enter a valid email");
        }
        if !is_blank(&self.position) && !POSITIONS.contains(&self.position.as_str()) {
            errors.insert("position", "Please select a position from the list");
        }
        if !is_blank(&self.experience)
            && !EXPERIENCE_BRACKETS
                .iter()
                .any(|(value, _)| *value == self.experience)
        {
            errors.insert("experience", "Please select an experience level");
        }
        if !is_blank(&self.notice_period) && self.notice_period_date().is_none() {
            errors.insert("notice_period", "Please pick a valid date");
        }
        if !is_blank(&self.resume) && !has_resume_extension(&self.resume) {
            errors.insert("resume", "Resume must be a PDF, DOC or DOCX file");
        }
        if !is_blank(&self.linkedin_url) && !is_web_url(&self.linkedin_url) {
            errors.insert("linkedin_url", "Please enter a full URL");
        }
        if !is_blank(&self.portfolio_url) && !is_web_url(&self.portfolio_url) {
            errors.insert("portfolio_url", "Please enter a full URL");
        }

        if errors.is_empty() {
            return Ok(());
        }
        let message = if self.agreed_to_terms {
            FIELDS_REQUIRED
        } else {
            CONSENT_REQUIRED
        };
        Err(Rejection { message, errors })
    }
}

fn has_resume_extension(file_name: &str) -> bool {
    file_name
        .trim()
        .rsplit_once('.')
        .is_some_and(|(_, ext)| RESUME_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn complete() -> Application {
        Application {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "+91-9000000000".into(),
            position: "Backend Developer".into(),
            agreed_to_terms: true,
            ..Default::default()
        }
    }
}
