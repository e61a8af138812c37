//! Data Models
//!
//! Record types for the two list pages, plus their fixed seed data. Records
//! live in component-local signals and are dropped on navigation or reload.

use crate::pipeline::Votable;

/// A quote on the Quotes page
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub id: u32,
    pub text: String,
    pub votes: u32,
}

impl Quote {
    pub fn new(id: u32, text: impl Into<String>, votes: u32) -> Self {
        Self {
            id,
            text: text.into(),
            votes,
        }
    }
}

impl Votable for Quote {
    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.text
    }

    fn votes(&self) -> u32 {
        self.votes
    }

    fn with_votes(&self, votes: u32) -> Self {
        Self {
            votes,
            ..self.clone()
        }
    }

    fn with_id(&self, id: u32) -> Self {
        Self { id, ..self.clone() }
    }
}

/// An entry on the Show List page
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: u32,
    pub title: String,
    pub votes: u32,
}

impl ListEntry {
    pub fn new(id: u32, title: impl Into<String>, votes: u32) -> Self {
        Self {
            id,
            title: title.into(),
            votes,
        }
    }
}

impl Votable for ListEntry {
    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn votes(&self) -> u32 {
        self.votes
    }

    fn with_votes(&self, votes: u32) -> Self {
        Self {
            votes,
            ..self.clone()
        }
    }

    fn with_id(&self, id: u32) -> Self {
        Self { id, ..self.clone() }
    }
}

/// Seed quotes shown when the Quotes page mounts
pub fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote::new(1, "อย่ายอมแพ้ แม้จะไม่ได้กำลังใจจากใคร", 5),
        Quote::new(2, "ทำวันนี้ให้ดีที่สุด แล้วพรุ่งนี้จะดีขึ้นเอง", 10),
        Quote::new(3, "ชีวิตก็เหมือนคณิตศาสตร์ บางครั้งก็มีแต่โจทย์ที่ยาก", 3),
    ]
}

/// Seed entries shown when the Show List page mounts
pub fn seed_entries() -> Vec<ListEntry> {
    vec![
        ListEntry::new(1, "Quote 1", 12),
        ListEntry::new(2, "Quote 2", 19),
        ListEntry::new(3, "Quote 3", 3),
    ]
}
