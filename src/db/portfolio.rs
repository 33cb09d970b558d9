use anyhow::{Result, anyhow};
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use nanoid::nanoid;

use crate::models::defaults::default_portfolio;
use crate::models::portfolio::{Certificate, Experience, Portfolio, Project, UserInfo};

/// Store for the singleton portfolio document.
///
/// Every mutation loads the document (materializing defaults if absent),
/// changes it in memory and writes the whole document back. Last write wins;
/// there is a single admin, so no optimistic concurrency control.
#[derive(Clone)]
pub struct PortfolioStore {
    collection: Collection<Portfolio>,
}

impl PortfolioStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Portfolio>("portfolios"),
        }
    }

    /// Return the singleton, creating it from the hardcoded defaults when no
    /// document exists yet. The public page never sees "no content".
    pub async fn get_or_create(&self) -> Result<Portfolio> {
        if let Some(portfolio) = self.collection.find_one(doc! {}).await? {
            return Ok(portfolio);
        }

        let mut portfolio = default_portfolio();
        let inserted = self.collection.insert_one(&portfolio).await?;
        portfolio.id = inserted.inserted_id.as_object_id();
        log::info!("default portfolio content created");
        Ok(portfolio)
    }

    async fn save(&self, portfolio: &mut Portfolio) -> Result<()> {
        let id = portfolio
            .id
            .ok_or_else(|| anyhow!("portfolio document has no id"))?;
        portfolio.updated_at = Some(chrono::Utc::now().timestamp_millis());
        self.collection
            .replace_one(doc! { "_id": id }, &*portfolio)
            .await?;
        Ok(())
    }

    pub async fn update_user_info(&self, user_info: UserInfo) -> Result<UserInfo> {
        let mut portfolio = self.get_or_create().await?;
        portfolio.user_info = user_info.clone();
        self.save(&mut portfolio).await?;
        Ok(user_info)
    }

    pub async fn add_project(&self, mut project: Project) -> Result<Project> {
        if project.id.is_empty() {
            project.id = nanoid!(8);
        }
        let mut portfolio = self.get_or_create().await?;
        portfolio.projects.push(project.clone());
        self.save(&mut portfolio).await?;
        Ok(project)
    }

    pub async fn update_project(&self, id: &str, mut project: Project) -> Result<Option<Project>> {
        if project.id.is_empty() {
            project.id = id.to_string();
        }
        let mut portfolio = self.get_or_create().await?;
        if !portfolio.replace_project(id, project.clone()) {
            return Ok(None);
        }
        self.save(&mut portfolio).await?;
        Ok(Some(project))
    }

    pub async fn remove_project(&self, id: &str) -> Result<bool> {
        let mut portfolio = self.get_or_create().await?;
        if !portfolio.remove_project(id) {
            return Ok(false);
        }
        self.save(&mut portfolio).await?;
        Ok(true)
    }

    pub async fn add_experience(&self, mut experience: Experience) -> Result<Experience> {
        if experience.id.is_empty() {
            experience.id = nanoid!(8);
        }
        let mut portfolio = self.get_or_create().await?;
        portfolio.experiences.push(experience.clone());
        self.save(&mut portfolio).await?;
        Ok(experience)
    }

    pub async fn update_experience(
        &self,
        id: &str,
        mut experience: Experience,
    ) -> Result<Option<Experience>> {
        if experience.id.is_empty() {
            experience.id = id.to_string();
        }
        let mut portfolio = self.get_or_create().await?;
        if !portfolio.replace_experience(id, experience.clone()) {
            return Ok(None);
        }
        self.save(&mut portfolio).await?;
        Ok(Some(experience))
    }

    pub async fn remove_experience(&self, id: &str) -> Result<bool> {
        let mut portfolio = self.get_or_create().await?;
        if !portfolio.remove_experience(id) {
            return Ok(false);
        }
        self.save(&mut portfolio).await?;
        Ok(true)
    }

    pub async fn add_certificate(&self, mut certificate: Certificate) -> Result<Certificate> {
        if certificate.id.is_empty() {
            certificate.id = nanoid!(8);
        }
        let mut portfolio = self.get_or_create().await?;
        portfolio.certificates.push(certificate.clone());
        self.save(&mut portfolio).await?;
        Ok(certificate)
    }

    pub async fn update_certificate(
        &self,
        id: &str,
        mut certificate: Certificate,
    ) -> Result<Option<Certificate>> {
        if certificate.id.is_empty() {
            certificate.id = id.to_string();
        }
        let mut portfolio = self.get_or_create().await?;
        if !portfolio.replace_certificate(id, certificate.clone()) {
            return Ok(None);
        }
        self.save(&mut portfolio).await?;
        Ok(Some(certificate))
    }

    pub async fn remove_certificate(&self, id: &str) -> Result<bool> {
        let mut portfolio = self.get_or_create().await?;
        if !portfolio.remove_certificate(id) {
            return Ok(false);
        }
        self.save(&mut portfolio).await?;
        Ok(true)
    }
}
