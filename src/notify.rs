//! Notifications
//!
//! Toast text built from the record as it looks after a toggle.

use toggle_list::Record;

use crate::models::{Campaign, Event, Post};

/// Toast content
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Toast shown after liking a post; unliking is silent
pub fn post_liked(post: &Record<Post>) -> Option<Notice> {
    post.is_active().then(|| {
        Notice::new(
            "Post Liked!",
            format!("You liked {}'s post", post.payload().author),
        )
    })
}

/// Toast for a registration change
pub fn event_registration(event: &Record<Event>) -> Notice {
    let payload = event.payload();
    if event.is_active() {
        Notice::new(
            "Successfully Registered!",
            format!("You are now registered for {} on {}", payload.title, payload.date),
        )
    } else {
        Notice::new(
            "Registration Cancelled",
            format!("You have cancelled your registration for {}", payload.title),
        )
    }
}

/// Toast for a registration refused because the event is full
pub fn event_full(event: &Event) -> Notice {
    Notice::new("Event Full", format!("{} has no seats left", event.title))
}

/// Toast after a donation; the amount is left out when none was entered
pub fn donation(campaign: &Campaign, amount: Option<u32>) -> Notice {
    let description = match amount {
        Some(amount) => format!("Thank you for your ${} donation to {}", amount, campaign.title),
        None => format!("Thank you for your donation to {}", campaign.title),
    };
    Notice::new("Donation Successful!", description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CampaignCategory, EventKind, PostKind};

    fn post(active: bool) -> Record<Post> {
        Record::new(
            1,
            Post {
                author: "Sarah Johnson".to_string(),
                time: "2 hours ago".to_string(),
                content: String::new(),
                kind: PostKind::Achievement,
                comments: 8,
            },
        )
        .with_active(active)
        .with_counter(43)
    }

    fn gala(active: bool) -> Record<Event> {
        Record::new(
            1,
            Event {
                title: "Annual Alumni Gala 2024".to_string(),
                date: "December 15, 2024".to_string(),
                time: "7:00 PM".to_string(),
                location: String::new(),
                kind: EventKind::Reunion,
                max_attendees: 300,
                description: String::new(),
            },
        )
        .with_active(active)
        .with_counter(246)
    }

    #[test]
    fn test_post_liked_only_when_liked() {
        let notice = post_liked(&post(true)).unwrap();
        assert_eq!(notice.title, "Post Liked!");
        assert_eq!(notice.description, "You liked Sarah Johnson's post");
        assert!(post_liked(&post(false)).is_none());
    }

    #[test]
    fn test_event_registration_text() {
        let joined = event_registration(&gala(true));
        assert_eq!(joined.title, "Successfully Registered!");
        assert_eq!(
            joined.description,
            "You are now registered for Annual Alumni Gala 2024 on December 15, 2024"
        );

        let left = event_registration(&gala(false));
        assert_eq!(left.title, "Registration Cancelled");
        assert_eq!(
            left.description,
            "You have cancelled your registration for Annual Alumni Gala 2024"
        );
    }

    #[test]
    fn test_donation_text() {
        let campaign = Campaign {
            id: 1,
            title: "Student Scholarship Fund".to_string(),
            description: String::new(),
            goal: 100000,
            raised: 67500,
            contributors: 234,
            category: CampaignCategory::Scholarship,
            end_date: String::new(),
        };
        assert_eq!(
            donation(&campaign, Some(50)).description,
            "Thank you for your $50 donation to Student Scholarship Fund"
        );
        assert_eq!(
            donation(&campaign, None).description,
            "Thank you for your donation to Student Scholarship Fund"
        );
    }
}
