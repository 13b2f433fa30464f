//! Leitura da coleção de chats do WhatsApp

use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};

use crate::models::ChatDocument;

const CHATS_COLLECTION: &str = "chatwhatsapps";

/// Serviço de consulta aos chats sincronizados
///
/// Somente leitura: a escrita na coleção é responsabilidade do processo
/// que recebe os webhooks do gateway.
#[derive(Clone)]
pub struct ChatService {
    chats: Collection<ChatDocument>,
}

impl ChatService {
    pub fn new(db: &Database) -> Self {
        Self {
            chats: db.collection(CHATS_COLLECTION),
        }
    }

    /// Lista os chats mais recentes, ordenados por última mensagem
    /// (descendente). Empates ficam na ordem natural do banco.
    pub async fn list_recent(&self, limit: i64) -> mongodb::error::Result<Vec<ChatDocument>> {
        let cursor = self.chats.find(doc! {}, recent_chats_options(limit)).await?;
        cursor.try_collect().await
    }
}

fn recent_chats_options(limit: i64) -> FindOptions {
    FindOptions::builder()
        .sort(doc! { "lastMessageTime": -1 })
        .limit(limit)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_chats_options() {
        let options = recent_chats_options(50);
        assert_eq!(options.limit, Some(50));
        assert_eq!(options.sort, Some(doc! { "lastMessageTime": -1 }));
    }
}
