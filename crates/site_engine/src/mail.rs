use std::time::Duration;

use url::Url;

use crate::SubmissionError;

pub const DEFAULT_RECIPIENT: &str = "RFI@noreasinc.com";
const CONTACT_FALLBACK_SUBJECT: &str = "Website Contact Form";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub recipient: String,
    /// Pause after handing the URI to the mail client before the
    /// submission is reported as settled.
    pub settle_delay: Duration,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            settle_delay: Duration::from_millis(1000),
        }
    }
}

/// Snapshot of a job application as it is mailed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationMail {
    pub job_position: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub citizenship: String,
    pub experience: String,
    pub education: String,
    pub certifications: String,
    pub cover_letter: String,
}

impl ApplicationMail {
    pub fn subject(&self) -> String {
        format!(
            "Job Application - {} - {}",
            self.job_position, self.full_name
        )
    }

    pub fn body(&self) -> String {
        let body = format!(
            "\nNew Job Application for {position}\n\
             \n\
             PERSONAL INFORMATION\n\
             --------------------\n\
             Name: {name}\n\
             Email: {email}\n\
             Phone: {phone}\n\
             LinkedIn: {linkedin}\n\
             \n\
             QUALIFICATIONS\n\
             --------------\n\
             US Citizen/Permanent Resident: {citizenship}\n\
             Years of Experience: {experience}\n\
             Education Level: {education}\n\
             Certifications: {certifications}\n\
             \n\
             COVER LETTER\n\
             ------------\n\
             {cover_letter}\n\
             \n\
             Note: Resume file attached separately by applicant.\n",
            position = self.job_position,
            name = self.full_name,
            email = self.email,
            phone = self.phone,
            linkedin = or_placeholder(&self.linkedin, "Not provided"),
            citizenship = self.citizenship,
            experience = self.experience,
            education = self.education,
            certifications = or_placeholder(&self.certifications, "None listed"),
            cover_letter = or_placeholder(&self.cover_letter, "No cover letter provided"),
        );
        body.trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMail {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMail {
    pub fn subject(&self) -> String {
        or_placeholder(&self.subject, CONTACT_FALLBACK_SUBJECT).to_string()
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutgoingMail {
    Application(ApplicationMail),
    Contact(ContactMail),
}

impl OutgoingMail {
    pub fn subject(&self) -> String {
        match self {
            OutgoingMail::Application(mail) => mail.subject(),
            OutgoingMail::Contact(mail) => mail.subject(),
        }
    }

    pub fn body(&self) -> String {
        match self {
            OutgoingMail::Application(mail) => mail.body(),
            OutgoingMail::Contact(mail) => mail.body(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            OutgoingMail::Application(_) => "application",
            OutgoingMail::Contact(_) => "contact",
        }
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Percent-encodes everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, with
/// upper-case hex, byte by byte over the UTF-8 encoding.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

pub fn mailto_uri(recipient: &str, mail: &OutgoingMail) -> Result<Url, SubmissionError> {
    if recipient.trim().is_empty() {
        return Err(SubmissionError::InvalidUri("empty recipient".to_string()));
    }
    let raw = format!(
        "mailto:{recipient}?subject={}&body={}",
        encode_uri_component(&mail.subject()),
        encode_uri_component(&mail.body())
    );
    Url::parse(&raw).map_err(|err| SubmissionError::InvalidUri(err.to_string()))
}
