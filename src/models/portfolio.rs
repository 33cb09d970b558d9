use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The singleton aggregate holding all public-facing portfolio content.
/// Exactly one document is expected to exist; reads materialize defaults
/// when it is absent (see `PortfolioStore::get_or_create`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_info: UserInfo,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub name: Name,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "About is required"))]
    pub about: String,
    pub social_links: SocialLinks,
    pub skills: Skills,
    #[serde(default)]
    pub typewriter_strings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Name {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub other: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[validate(url(message = "Invalid GitHub URL"))]
    pub github_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    #[validate(length(min = 1, message = "Position is required"))]
    pub position: String,
    pub duration: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Certificate {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Issuer is required"))]
    pub issuer: String,
    pub date: String,
    #[validate(url(message = "Invalid certificate URL"))]
    pub url: String,
}

impl Portfolio {
    pub fn replace_project(&mut self, id: &str, project: Project) -> bool {
        match self.projects.iter_mut().find(|p| p.id == id) {
            Some(slot) => {
                *slot = project;
                true
            }
            None => false,
        }
    }

    pub fn remove_project(&mut self, id: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        self.projects.len() != before
    }

    pub fn replace_experience(&mut self, id: &str, experience: Experience) -> bool {
        match self.experiences.iter_mut().find(|e| e.id == id) {
            Some(slot) => {
                *slot = experience;
                true
            }
            None => false,
        }
    }

    pub fn remove_experience(&mut self, id: &str) -> bool {
        let before = self.experiences.len();
        self.experiences.retain(|e| e.id != id);
        self.experiences.len() != before
    }

    pub fn replace_certificate(&mut self, id: &str, certificate: Certificate) -> bool {
        match self.certificates.iter_mut().find(|c| c.id == id) {
            Some(slot) => {
                *slot = certificate;
                true
            }
            None => false,
        }
    }

    pub fn remove_certificate(&mut self, id: &str) -> bool {
        let before = self.certificates.len();
        self.certificates.retain(|c| c.id != id);
        self.certificates.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::defaults::default_portfolio;

    fn sample_project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            title: "Sample".to_string(),
            description: "A sample project".to_string(),
            tech_stack: vec!["Rust".to_string()],
            github_url: "https://github.com/example/sample".to_string(),
            demo_url: None,
            image: None,
        }
    }

    #[test]
    fn replace_project_swaps_matching_id() {
        let mut portfolio = default_portfolio();
        let existing = portfolio.projects[0].id.clone();
        let replaced = portfolio.replace_project(&existing, sample_project(&existing));
        assert!(replaced);
        assert_eq!(portfolio.projects[0].title, "Sample");
    }

    #[test]
    fn replace_project_with_unknown_id_leaves_list_unchanged() {
        let mut portfolio = default_portfolio();
        let titles: Vec<String> = portfolio.projects.iter().map(|p| p.title.clone()).collect();
        assert!(!portfolio.replace_project("no-such-id", sample_project("no-such-id")));
        let after: Vec<String> = portfolio.projects.iter().map(|p| p.title.clone()).collect();
        assert_eq!(titles, after);
    }

    #[test]
    fn remove_project_reports_absence() {
        let mut portfolio = default_portfolio();
        let count = portfolio.projects.len();
        assert!(!portfolio.remove_project("no-such-id"));
        assert_eq!(portfolio.projects.len(), count);

        let existing = portfolio.projects[0].id.clone();
        assert!(portfolio.remove_project(&existing));
        assert_eq!(portfolio.projects.len(), count - 1);
    }

    #[test]
    fn remove_experience_and_certificate_by_id() {
        let mut portfolio = default_portfolio();
        let exp_id = portfolio.experiences[0].id.clone();
        let cert_id = portfolio.certificates[0].id.clone();
        assert!(portfolio.remove_experience(&exp_id));
        assert!(portfolio.remove_certificate(&cert_id));
        assert!(!portfolio.remove_experience(&exp_id));
        assert!(!portfolio.remove_certificate(&cert_id));
    }

    #[test]
    fn project_validation_rejects_bad_github_url() {
        let mut project = sample_project("p1");
        assert!(project.validate().is_ok());
        project.github_url = "not-a-url".to_string();
        assert!(project.validate().is_err());
    }

    #[test]
    fn portfolio_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(default_portfolio()).unwrap();
        assert!(value.get("userInfo").is_some());
        assert!(value["userInfo"].get("socialLinks").is_some());
        assert!(value["projects"][0].get("githubUrl").is_some());
    }
}
