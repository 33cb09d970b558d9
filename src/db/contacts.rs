use anyhow::Result;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::models::contact::ContactMessage;

#[derive(Clone)]
pub struct ContactStore {
    collection: Collection<ContactMessage>,
}

impl ContactStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<ContactMessage>("contacts"),
        }
    }

    pub async fn create(&self, name: String, email: String, message: String) -> Result<ContactMessage> {
        let mut contact = ContactMessage::new(name, email, message);
        let inserted = self.collection.insert_one(&contact).await?;
        contact.id = inserted.inserted_id.as_object_id();
        Ok(contact)
    }

    pub async fn newest_first(&self) -> Result<Vec<ContactMessage>> {
        let messages = self
            .collection
            .find(doc! {})
            .sort(doc! { "timestamp": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(messages)
    }
}
