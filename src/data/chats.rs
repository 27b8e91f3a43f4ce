use crate::models::{ContactId, ContactRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u32,
    pub contact: ContactId,
    pub text: String,
    pub time: String,
    pub is_sent: bool,
    pub is_read: bool,
}

pub fn recent_contacts() -> Vec<ContactRecord> {
    [
        (
            1,
            "Sarah",
            "Chen",
            "Fix authentication bug",
            "2 min ago",
            true,
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop",
        ),
        (
            2,
            "Alex",
            "Rivera",
            "Update dashboard UI",
            "1 hour ago",
            true,
            "https://images.unsplash.com/photo-1599566150163-29194dcaad36?w=100&h=100&fit=crop",
        ),
        (
            3,
            "Michael",
            "Thompson",
            "Database optimization",
            "3 hours ago",
            false,
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop",
        ),
        (
            4,
            "Emma",
            "Watson",
            "API integration help",
            "Yesterday",
            false,
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop",
        ),
    ]
    .into_iter()
    .map(
        |(id, first, last, message, time, online, avatar)| ContactRecord {
            id: ContactId(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            last_message: message.to_string(),
            last_message_time: time.to_string(),
            is_online: online,
            avatar_url: avatar.to_string(),
        },
    )
    .collect()
}

/// Contacts whose full name contains `query`, ignoring case.
pub fn filter_contacts<'a>(contacts: &'a [ContactRecord], query: &str) -> Vec<&'a ContactRecord> {
    contacts.iter().filter(|c| c.matches(query)).collect()
}

/// Every chat thread, seeded with sample history.
#[derive(Debug, Clone)]
pub struct Conversations {
    messages: Vec<ChatMessage>,
}

impl Default for Conversations {
    fn default() -> Self {
        let seed = [
            (1, "Hey! I found a bug in the authentication flow.", "10:30 AM", false),
            (1, "Can you take a look?", "10:30 AM", false),
            (1, "Sure! Let me check it out. Can you share the error logs?", "10:32 AM", true),
            (1, "Here's the screenshot", "10:33 AM", false),
            (1, "I see the issue. Working on the fix now.", "10:35 AM", true),
            (2, "The dashboard redesign looks great!", "Yesterday", false),
            (2, "Thanks! Should we add more animations?", "Yesterday", true),
            (3, "Database optimization complete", "2 days ago", false),
            (4, "Need help with the API integration", "3 days ago", false),
        ];
        let messages = seed
            .into_iter()
            .zip(1..)
            .map(|((contact, text, time, is_sent), id)| ChatMessage {
                id,
                contact: ContactId(contact),
                text: text.to_string(),
                time: time.to_string(),
                is_sent,
                is_read: true,
            })
            .collect();
        Self { messages }
    }
}

impl Conversations {
    pub fn thread(&self, contact: ContactId) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().filter(move |m| m.contact == contact)
    }

    /// Appends an outgoing message. Blank text or no selected contact is ignored.
    pub fn send(
        &mut self,
        contact: Option<ContactId>,
        text: &str,
        time: impl Into<String>,
    ) -> Option<&ChatMessage> {
        let contact = contact?;
        if text.trim().is_empty() {
            return None;
        }
        let id = self.messages.len() as u32 + 1;
        self.messages.push(ChatMessage {
            id,
            contact,
            text: text.to_string(),
            time: time.into(),
            is_sent: true,
            is_read: false,
        });
        self.messages.last()
    }
}

/// Local wall-clock time as `HH:MM`, falling back to UTC when the offset is unknown.
pub fn current_time_label() -> String {
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    now.format(time::macros::format_description!("[hour]:[minute]"))
        .unwrap_or_default()
}
