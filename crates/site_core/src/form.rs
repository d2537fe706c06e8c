use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldName {
    FullName,
    Email,
    Phone,
    Linkedin,
    Citizenship,
    Experience,
    Education,
    Certifications,
    CoverLetter,
    JobPosition,
    JobId,
}

impl FieldName {
    /// Required fields, in the order they are checked.
    pub const REQUIRED: [FieldName; 6] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Citizenship,
        FieldName::Experience,
        FieldName::Education,
    ];

    /// Form control name, also used in user-facing messages.
    pub fn key(self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Linkedin => "linkedin",
            FieldName::Citizenship => "citizenship",
            FieldName::Experience => "experience",
            FieldName::Education => "education",
            FieldName::Certifications => "certifications",
            FieldName::CoverLetter => "coverLetter",
            FieldName::JobPosition => "jobPosition",
            FieldName::JobId => "jobId",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let field = match key {
            "fullName" => FieldName::FullName,
            "email" => FieldName::Email,
            "phone" => FieldName::Phone,
            "linkedin" => FieldName::Linkedin,
            "citizenship" => FieldName::Citizenship,
            "experience" => FieldName::Experience,
            "education" => FieldName::Education,
            "certifications" => FieldName::Certifications,
            "coverLetter" => FieldName::CoverLetter,
            "jobPosition" => FieldName::JobPosition,
            "jobId" => FieldName::JobId,
            _ => return None,
        };
        Some(field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub citizenship: String,
    pub experience: String,
    pub education: String,
    pub certifications: String,
    pub cover_letter: String,
    pub job_position: String,
    pub job_id: String,
}

impl ApplicationForm {
    pub fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::FullName => &self.full_name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Linkedin => &self.linkedin,
            FieldName::Citizenship => &self.citizenship,
            FieldName::Experience => &self.experience,
            FieldName::Education => &self.education,
            FieldName::Certifications => &self.certifications,
            FieldName::CoverLetter => &self.cover_letter,
            FieldName::JobPosition => &self.job_position,
            FieldName::JobId => &self.job_id,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        let slot = match field {
            FieldName::FullName => &mut self.full_name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::Linkedin => &mut self.linkedin,
            FieldName::Citizenship => &mut self.citizenship,
            FieldName::Experience => &mut self.experience,
            FieldName::Education => &mut self.education,
            FieldName::Certifications => &mut self.certifications,
            FieldName::CoverLetter => &mut self.cover_letter,
            FieldName::JobPosition => &mut self.job_position,
            FieldName::JobId => &mut self.job_id,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn key(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "subject" => Some(ContactField::Subject),
            "message" => Some(ContactField::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }
}
