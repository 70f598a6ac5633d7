use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Commercial,
    MusicVideo,
    Documentary,
    Corporate,
    SocialMedia,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 6] = [
        ProjectType::Commercial,
        ProjectType::MusicVideo,
        ProjectType::Documentary,
        ProjectType::Corporate,
        ProjectType::SocialMedia,
        ProjectType::Other,
    ];

    /// Form value of the `<option>`.
    pub fn value(&self) -> &'static str {
        match self {
            ProjectType::Commercial => "commercial",
            ProjectType::MusicVideo => "music-video",
            ProjectType::Documentary => "documentary",
            ProjectType::Corporate => "corporate",
            ProjectType::SocialMedia => "social-media",
            ProjectType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Commercial => "Commercial",
            ProjectType::MusicVideo => "Music Video",
            ProjectType::Documentary => "Documentary",
            ProjectType::Corporate => "Corporate",
            ProjectType::SocialMedia => "Social Media",
            ProjectType::Other => "Other",
        }
    }
}

impl FromStr for ProjectType {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::ALL
            .into_iter()
            .find(|p| p.value() == s)
            .ok_or(ContactError::MissingProjectType)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please tell me your name")]
    MissingName,
    #[error("That email address doesn't look right")]
    InvalidEmail,
    #[error("Please pick a project type")]
    MissingProjectType,
    #[error("Please add a few details about your project")]
    MissingMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub project: String,
    pub message: String,
}

/// A contact request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub project: ProjectType,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactRequest, ContactError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        let project = self.project.parse::<ProjectType>()?;
        let message = self.message.trim();
        if message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            project,
            message: message.to_string(),
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !email.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "  Ada Lovelace ".to_string(),
            email: "ada@example.com".to_string(),
            project: "music-video".to_string(),
            message: "Three minute cut for a single release.".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let request = filled().validate().expect("form should be valid");
        assert_eq!(request.name, "Ada Lovelace");
        assert_eq!(request.project, ProjectType::MusicVideo);
    }

    #[test]
    fn test_missing_name() {
        let form = ContactForm {
            name: "   ".to_string(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(ContactError::MissingName));
    }

    #[test]
    fn test_bad_emails() {
        for email in [
            "",
            "ada",
            "@example.com",
            "ada@",
            "ada@example",
            "ada@ex@ample.com",
            "a da@example.com",
        ] {
            let form = ContactForm {
                email: email.to_string(),
                ..filled()
            };
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn test_unknown_project_type() {
        let form = ContactForm {
            project: String::new(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(ContactError::MissingProjectType));
        assert!("wedding".parse::<ProjectType>().is_err());
    }

    #[test]
    fn test_missing_message() {
        let form = ContactForm {
            message: "\n".to_string(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(ContactError::MissingMessage));
    }
}
