//! Frontend Models
//!
//! Payloads for each toggle list plus the static dashboard, donation and
//! profile data.

use serde::{Deserialize, Serialize};
use toggle_list::Payload;

/// Feed post kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    #[default]
    Update,
    Achievement,
    Job,
    Event,
}

impl PostKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostKind::Update => "update",
            PostKind::Achievement => "achievement",
            PostKind::Job => "job",
            PostKind::Event => "event",
        }
    }

    /// Badge color class
    pub fn tone(&self) -> &'static str {
        match self {
            PostKind::Achievement => "green",
            PostKind::Job => "blue",
            PostKind::Event => "purple",
            PostKind::Update => "gray",
        }
    }
}

/// Feed post; likes live in the record counter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub author: String,
    pub time: String,
    pub content: String,
    pub kind: PostKind,
    pub comments: u32,
}

impl Payload for Post {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.author.as_str(), self.content.as_str()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Networking,
    Reunion,
    Workshop,
    Social,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Networking => "networking",
            EventKind::Reunion => "reunion",
            EventKind::Workshop => "workshop",
            EventKind::Social => "social",
        }
    }

    pub fn tone(&self) -> &'static str {
        match self {
            EventKind::Networking => "blue",
            EventKind::Reunion => "purple",
            EventKind::Workshop => "green",
            EventKind::Social => "orange",
        }
    }
}

/// Alumni event; attendees live in the record counter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub kind: EventKind,
    pub max_attendees: u32,
    pub description: String,
}

impl Payload for Event {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.location.as_str()]
    }

    fn capacity(&self) -> Option<u32> {
        Some(self.max_attendees)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobKind {
    FullTime,
    PartTime,
    Contract,
    Remote,
}

impl JobKind {
    /// Display label ("full time")
    pub fn label(&self) -> &'static str {
        match self {
            JobKind::FullTime => "full time",
            JobKind::PartTime => "part time",
            JobKind::Contract => "contract",
            JobKind::Remote => "remote",
        }
    }

    pub fn tone(&self) -> &'static str {
        match self {
            JobKind::FullTime => "green",
            JobKind::PartTime => "blue",
            JobKind::Contract => "orange",
            JobKind::Remote => "purple",
        }
    }
}

/// Job listing; the record flag means "applied"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    pub kind: JobKind,
    pub salary: String,
    pub posted: String,
    pub description: String,
}

impl Payload for Job {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.company.as_str()]
    }
}

/// Alumni directory entry; the record flag means "connected"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub year: String,
}

impl Payload for Member {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.company.as_str(), self.position.as_str()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignCategory {
    Scholarship,
    Infrastructure,
    Research,
    Sports,
}

impl CampaignCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignCategory::Scholarship => "scholarship",
            CampaignCategory::Infrastructure => "infrastructure",
            CampaignCategory::Research => "research",
            CampaignCategory::Sports => "sports",
        }
    }

    pub fn tone(&self) -> &'static str {
        match self {
            CampaignCategory::Scholarship => "blue",
            CampaignCategory::Infrastructure => "green",
            CampaignCategory::Research => "purple",
            CampaignCategory::Sports => "orange",
        }
    }
}

/// Fundraising campaign (read-only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub goal: u64,
    pub raised: u64,
    pub contributors: u32,
    pub category: CampaignCategory,
    pub end_date: String,
}

/// Dashboard headline number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub title: String,
    pub value: String,
    pub trend: String,
}

/// Dashboard activity line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub user: String,
    pub action: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub stats: Vec<Stat>,
    pub activity: Vec<Activity>,
}

/// Signed-in alumnus profile
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub graduation: String,
    pub degree: String,
    pub position: String,
    pub company: String,
    pub location: String,
    pub website: String,
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Profile fields editable in the profile view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Email,
    Phone,
    Location,
    Website,
    Position,
    Company,
    Graduation,
    Degree,
}

impl ProfileField {
    pub const CONTACT: [ProfileField; 4] = [
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Location,
        ProfileField::Website,
    ];

    pub const PROFESSIONAL: [ProfileField; 4] = [
        ProfileField::Position,
        ProfileField::Company,
        ProfileField::Graduation,
        ProfileField::Degree,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone",
            ProfileField::Location => "Location",
            ProfileField::Website => "Website",
            ProfileField::Position => "Current Position",
            ProfileField::Company => "Company",
            ProfileField::Graduation => "Graduation Year",
            ProfileField::Degree => "Degree",
        }
    }

    pub fn get<'a>(&self, profile: &'a Profile) -> &'a str {
        match self {
            ProfileField::Email => &profile.email,
            ProfileField::Phone => &profile.phone,
            ProfileField::Location => &profile.location,
            ProfileField::Website => &profile.website,
            ProfileField::Position => &profile.position,
            ProfileField::Company => &profile.company,
            ProfileField::Graduation => &profile.graduation,
            ProfileField::Degree => &profile.degree,
        }
    }

    pub fn set(&self, profile: &mut Profile, value: String) {
        let slot = match self {
            ProfileField::Email => &mut profile.email,
            ProfileField::Phone => &mut profile.phone,
            ProfileField::Location => &mut profile.location,
            ProfileField::Website => &mut profile.website,
            ProfileField::Position => &mut profile.position,
            ProfileField::Company => &mut profile.company,
            ProfileField::Graduation => &mut profile.graduation,
            ProfileField::Degree => &mut profile.degree,
        };
        *slot = value;
    }
}
