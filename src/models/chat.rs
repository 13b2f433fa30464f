//! Chats de WhatsApp sincronizados pelo gateway
//!
//! A coleção `chatwhatsapps` é alimentada por um processo externo
//! (webhooks da Evolution API); este backend apenas lê e achata os
//! documentos para o frontend.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// Documento persistido na coleção `chatwhatsapps`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub contact_jid: String,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub last_message_time: Option<bson::DateTime>,
    #[serde(default)]
    pub unread_count: Option<i64>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub cliente_id: Option<ObjectId>,
    #[serde(default)]
    pub updated_at: Option<bson::DateTime>,
}

/// Forma achatada devolvida por `GET /api/whatsapp/chats`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSummary {
    pub id: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_jid: String,
    pub last_message: String,
    pub last_message_time: Option<DateTime<Utc>>,
    pub unread_count: i64,
    pub is_online: bool,
    pub profile_picture: Option<String>,
    pub cliente_id: Option<String>,
}

impl From<ChatDocument> for ChatSummary {
    fn from(chat: ChatDocument) -> Self {
        // Sem lastMessageTime, vale o updatedAt do documento
        let last_message_time = chat
            .last_message_time
            .or(chat.updated_at)
            .map(|dt| dt.to_chrono());

        Self {
            id: chat.id.to_hex(),
            contact_phone: phone_from_jid(&chat.contact_jid).to_string(),
            contact_name: chat.contact_name,
            contact_jid: chat.contact_jid,
            last_message: chat.last_message.unwrap_or_default(),
            last_message_time,
            unread_count: chat.unread_count.unwrap_or(0),
            // Presença exigiria o websocket da Evolution API
            is_online: false,
            profile_picture: chat.profile_picture,
            cliente_id: chat.cliente_id.map(|id| id.to_hex()),
        }
    }
}

/// Extrai o telefone de um JID do WhatsApp
///
/// Remove exatamente o sufixo `@s.whatsapp.net` (contato) ou `@g.us`
/// (grupo); os dígitos restantes não são validados.
pub fn phone_from_jid(jid: &str) -> &str {
    jid.strip_suffix("@s.whatsapp.net")
        .or_else(|| jid.strip_suffix("@g.us"))
        .unwrap_or(jid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat_doc(jid: &str) -> ChatDocument {
        ChatDocument {
            id: ObjectId::new(),
            contact_name: "Maria da Silva".to_string(),
            contact_jid: jid.to_string(),
            last_message: None,
            last_message_time: None,
            unread_count: None,
            profile_picture: None,
            cliente_id: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_phone_from_jid_contato() {
        assert_eq!(phone_from_jid("5511999990000@s.whatsapp.net"), "5511999990000");
    }

    #[test]
    fn test_phone_from_jid_grupo() {
        assert_eq!(phone_from_jid("120363041234567890@g.us"), "120363041234567890");
    }

    #[test]
    fn test_phone_from_jid_sem_sufixo_conhecido() {
        assert_eq!(phone_from_jid("5511999990000"), "5511999990000");
        assert_eq!(phone_from_jid(""), "");
    }

    #[test]
    fn test_summary_aplica_padroes() {
        let chat = chat_doc("5511988887777@s.whatsapp.net");
        let id_esperado = chat.id.to_hex();
        let summary = ChatSummary::from(chat);

        assert_eq!(summary.id, id_esperado);
        assert_eq!(summary.contact_phone, "5511988887777");
        assert_eq!(summary.last_message, "");
        assert_eq!(summary.unread_count, 0);
        assert!(!summary.is_online);
        assert!(summary.last_message_time.is_none());
        assert!(summary.cliente_id.is_none());
    }

    #[test]
    fn test_summary_usa_updated_at_como_fallback() {
        let mut chat = chat_doc("5511988887777@s.whatsapp.net");
        let updated = bson::DateTime::from_millis(1_700_000_000_000);
        chat.updated_at = Some(updated);

        let summary = ChatSummary::from(chat);
        assert_eq!(summary.last_message_time, Some(updated.to_chrono()));
    }

    #[test]
    fn test_summary_prefere_last_message_time() {
        let mut chat = chat_doc("5511988887777@s.whatsapp.net");
        let last = bson::DateTime::from_millis(1_700_000_111_000);
        chat.last_message_time = Some(last);
        chat.updated_at = Some(bson::DateTime::from_millis(1_600_000_000_000));
        chat.last_message = Some("Bom dia, doutor".to_string());
        chat.unread_count = Some(3);

        let summary = ChatSummary::from(chat);
        assert_eq!(summary.last_message_time, Some(last.to_chrono()));
        assert_eq!(summary.last_message, "Bom dia, doutor");
        assert_eq!(summary.unread_count, 3);
    }
}
