//! Seed Data
//!
//! Mock lists embedded at build time. Each view seeds its own source on
//! mount, so toggles are lost when the view is left.

use toggle_list::{SeedSource, StoreResult};

use crate::models::{Campaign, Dashboard, Event, Job, Member, Post, Profile};

const FEED_JSON: &str = include_str!("../seed/feed.json");
const EVENTS_JSON: &str = include_str!("../seed/events.json");
const JOBS_JSON: &str = include_str!("../seed/jobs.json");
const MEMBERS_JSON: &str = include_str!("../seed/members.json");
const CAMPAIGNS_JSON: &str = include_str!("../seed/campaigns.json");
const DASHBOARD_JSON: &str = include_str!("../seed/dashboard.json");
const PROFILE_JSON: &str = include_str!("../seed/profile.json");

pub fn feed_source() -> StoreResult<SeedSource<Post>> {
    SeedSource::from_json(FEED_JSON)
}

pub fn event_source() -> StoreResult<SeedSource<Event>> {
    SeedSource::from_json(EVENTS_JSON)
}

pub fn job_source() -> StoreResult<SeedSource<Job>> {
    SeedSource::from_json(JOBS_JSON)
}

pub fn member_source() -> StoreResult<SeedSource<Member>> {
    SeedSource::from_json(MEMBERS_JSON)
}

pub fn campaigns() -> Result<Vec<Campaign>, serde_json::Error> {
    serde_json::from_str(CAMPAIGNS_JSON)
}

pub fn dashboard() -> Result<Dashboard, serde_json::Error> {
    serde_json::from_str(DASHBOARD_JSON)
}

pub fn profile() -> Result<Profile, serde_json::Error> {
    serde_json::from_str(PROFILE_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use toggle_list::{RecordSource, StoreError};

    #[test]
    fn test_all_seeds_parse() {
        assert_eq!(feed_source().unwrap().load().unwrap().len(), 4);
        assert_eq!(event_source().unwrap().load().unwrap().len(), 4);
        assert_eq!(job_source().unwrap().load().unwrap().len(), 4);
        assert_eq!(member_source().unwrap().load().unwrap().len(), 4);
        assert_eq!(campaigns().unwrap().len(), 4);
        assert_eq!(dashboard().unwrap().stats.len(), 4);
        assert_eq!(profile().unwrap().name, "John Doe");
    }

    #[test]
    fn test_only_one_feed_and_event_seed_start_active() {
        let feed = feed_source().unwrap().load().unwrap();
        let active: Vec<_> = feed.iter().filter(|r| r.is_active()).map(|r| r.id()).collect();
        assert_eq!(active, vec![2]);

        let events = event_source().unwrap().load().unwrap();
        let active: Vec<_> = events.iter().filter(|r| r.is_active()).map(|r| r.id()).collect();
        assert_eq!(active, vec![2]);

        assert_eq!(member_source().unwrap().load().unwrap().active_count(), 0);
    }

    #[test]
    fn test_feed_likes_follow_toggle() {
        let mut source = feed_source().unwrap();
        let liked = source.toggle(1).unwrap();
        let post = liked.get(1).unwrap();
        assert!(post.is_active());
        assert_eq!(post.counter(), Some(43));

        let unliked = source.toggle(2).unwrap();
        assert_eq!(unliked.get(2).unwrap().counter(), Some(27));
        assert_eq!(unliked.get(1).unwrap().counter(), Some(43));
    }

    #[test]
    fn test_member_search() {
        let members = member_source().unwrap().load().unwrap();
        let hits = members.filter("go");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].payload().name, "Sarah Johnson");

        let by_position = members.filter("engineer");
        assert_eq!(by_position.len(), 1);
        assert_eq!(by_position[0].payload().name, "James Wilson");
    }

    #[test]
    fn test_job_search_ignores_case() {
        let jobs = job_source().unwrap().load().unwrap();
        let upper: Vec<_> = jobs.filter("GOOGLE").iter().map(|r| r.id()).collect();
        let lower: Vec<_> = jobs.filter("google").iter().map(|r| r.id()).collect();
        assert_eq!(upper, vec![1]);
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_jobs_have_no_counter() {
        let jobs = job_source().unwrap().load().unwrap();
        assert!(jobs.iter().all(|r| r.counter().is_none()));
        assert!(jobs.get(3).unwrap().is_active());
    }

    #[test]
    fn test_event_registration_respects_capacity() {
        let mut source = event_source().unwrap();
        let registered = source.toggle(1).unwrap();
        assert_eq!(registered.get(1).unwrap().counter(), Some(246));

        let cancelled = source.toggle(2).unwrap();
        assert_eq!(cancelled.get(2).unwrap().counter(), Some(88));
        assert!(!cancelled.get(2).unwrap().is_active());

        let unknown = source.toggle(42).unwrap();
        assert_eq!(unknown, cancelled);
    }

    #[test]
    fn test_full_event_refuses_registration() {
        let full = r#"[{"id": 9, "counter": 2, "title": "Dinner", "date": "", "time": "",
            "location": "", "kind": "social", "max_attendees": 2, "description": ""}]"#;
        let mut source = SeedSource::<Event>::from_json(full).unwrap();
        assert_eq!(
            source.toggle(9).unwrap_err(),
            StoreError::CapacityReached { id: 9, capacity: 2 }
        );
    }
}
