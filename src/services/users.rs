//! Leitura da coleção de usuários

use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::models::UserDocument;

const USERS_COLLECTION: &str = "users";

#[derive(Clone)]
pub struct UserService {
    users: Collection<UserDocument>,
}

impl UserService {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection(USERS_COLLECTION),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> mongodb::error::Result<Option<UserDocument>> {
        self.users.find_one(doc! { "email": email }, None).await
    }
}
