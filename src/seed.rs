// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static seed data the prototype boots from.
//!
//! Identities and counters mirror the shipped mock feed; timestamps are
//! taken relative to the current time so the relative-time labels stay
//! plausible. All collections start from seed and live in memory; only
//! the session and theme survive a restart.

use chrono::{Duration, Utc};

use crate::models::{
    Achievement, ActivityItem, ActivityKind, Actor, Comment, Engagement, Trip, TripMeta,
    TripSummary, User,
};

fn avatar(file: &str) -> Option<String> {
    Some(format!(
        "https://images.unsplash.com/{file}?w=200&h=200&fit=crop&crop=face"
    ))
}

fn photo(file: &str) -> String {
    format!("https://images.unsplash.com/{file}?w=800&h=600&fit=crop")
}

/// The adventurers every collection references.
pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "Sarah Johnson".to_string(),
            email: Some("sarah@example.com".to_string()),
            avatar: avatar("photo-1494790108755-2616b612b786"),
            bio: Some("Mountain enthusiast and photographer".to_string()),
            followers: Some(1250),
            following: Some(340),
            trips: Some(45),
        },
        User {
            id: "2".to_string(),
            name: "Mike Chen".to_string(),
            email: Some("mike@example.com".to_string()),
            avatar: avatar("photo-1472099645785-5658abf4ff4e"),
            bio: Some("Lake camping expert and outdoor gear reviewer".to_string()),
            followers: Some(890),
            following: Some(210),
            trips: Some(32),
        },
        User {
            id: "3".to_string(),
            name: "Alex Rivera".to_string(),
            email: Some("alex@example.com".to_string()),
            avatar: avatar("photo-1507003211169-0a1dd7228f2d"),
            bio: Some("Desert backpacking specialist and wilderness survival instructor".to_string()),
            followers: Some(2100),
            following: Some(180),
            trips: Some(67),
        },
        User {
            id: "4".to_string(),
            name: "Emma Wilson".to_string(),
            email: Some("emma@example.com".to_string()),
            avatar: avatar("photo-1438761681033-6461ffad8d80"),
            bio: None,
            followers: None,
            following: None,
            trips: None,
        },
    ]
}

/// The trips shown on the feed page.
pub fn trips() -> Vec<Trip> {
    let users = users();
    let now = Utc::now();

    vec![
        Trip {
            id: "1".to_string(),
            title: "Amazing Mountain Hike".to_string(),
            description: "Beautiful sunrise from the peak with incredible views of the valley \
                          below. Perfect weather and great company!"
                .to_string(),
            location: "Yosemite National Park, CA".to_string(),
            author: users[0].clone(),
            photos: vec![
                photo("photo-1506905925346-21bda4d32df4"),
                photo("photo-1441974231531-c6227db76b6e"),
            ],
            likes: 24,
            comments: 8,
            is_liked: false,
            is_saved: false,
            timestamp: now - Duration::hours(2),
            meta: TripMeta {
                duration: Some("2 days".to_string()),
                group_size: Some(4),
                season: Some("Spring".to_string()),
                tags: vec![
                    "Hiking".to_string(),
                    "Photography".to_string(),
                    "Sunrise".to_string(),
                ],
                distance_km: Some(12.5),
            },
        },
        Trip {
            id: "2".to_string(),
            title: "Lakeside Camping Adventure".to_string(),
            description: "Spent an amazing weekend by the lake with friends. The stars were \
                          incredible at night!"
                .to_string(),
            location: "Lake Tahoe, CA".to_string(),
            author: users[1].clone(),
            photos: vec![photo("photo-1441974231531-c6227db76b6e")],
            likes: 18,
            comments: 12,
            is_liked: true,
            is_saved: false,
            timestamp: now - Duration::hours(5),
            meta: TripMeta {
                duration: Some("2 days".to_string()),
                group_size: Some(6),
                season: Some("Summer".to_string()),
                tags: vec!["Camping".to_string(), "Stargazing".to_string()],
                distance_km: Some(4.2),
            },
        },
        Trip {
            id: "3".to_string(),
            title: "Desert Backpacking".to_string(),
            description: "Challenging but rewarding trek through the desert. The sunrise was \
                          worth every step."
                .to_string(),
            location: "Joshua Tree National Park, CA".to_string(),
            author: users[2].clone(),
            photos: vec![photo("photo-1506905925346-21bda4d32df4")],
            likes: 31,
            comments: 5,
            is_liked: false,
            is_saved: true,
            timestamp: now - Duration::hours(24),
            meta: TripMeta {
                duration: Some("3 days".to_string()),
                group_size: Some(2),
                season: Some("Fall".to_string()),
                tags: vec!["Backpacking".to_string(), "Desert".to_string()],
                distance_km: Some(28.0),
            },
        },
    ]
}

/// The heterogeneous activity feed entries.
pub fn activities() -> Vec<ActivityItem> {
    let users = users();
    let now = Utc::now();

    let mountain_hike = TripSummary {
        id: "1".to_string(),
        title: "Amazing Mountain Hike".to_string(),
        location: "Yosemite National Park, CA".to_string(),
        photos: vec![photo("photo-1506905925346-21bda4d32df4")],
    };
    let lakeside_camping = TripSummary {
        id: "2".to_string(),
        title: "Lakeside Camping Adventure".to_string(),
        location: "Lake Tahoe, CA".to_string(),
        photos: vec![photo("photo-1441974231531-c6227db76b6e")],
    };

    vec![
        ActivityItem {
            id: "1".to_string(),
            actor: Actor {
                user: users[0].clone(),
                is_following: true,
            },
            timestamp: now - Duration::hours(2),
            kind: ActivityKind::TripShared {
                trip: mountain_hike,
                engagement: Engagement {
                    likes: 24,
                    comments: 8,
                    is_liked: false,
                },
            },
        },
        ActivityItem {
            id: "2".to_string(),
            actor: Actor {
                user: users[1].clone(),
                is_following: true,
            },
            timestamp: now - Duration::hours(4),
            kind: ActivityKind::Achieved {
                achievement: Achievement {
                    name: "Peak Bagger".to_string(),
                    description: "Completed 10 mountain summits".to_string(),
                    icon: "🏔️".to_string(),
                },
            },
        },
        ActivityItem {
            id: "3".to_string(),
            actor: Actor {
                user: users[2].clone(),
                is_following: false,
            },
            timestamp: now - Duration::hours(6),
            kind: ActivityKind::Followed {
                target: users[3].clone(),
            },
        },
        ActivityItem {
            id: "4".to_string(),
            actor: Actor {
                user: users[3].clone(),
                is_following: true,
            },
            timestamp: now - Duration::days(1),
            kind: ActivityKind::Commented {
                trip: lakeside_camping,
                content: "What an incredible sunrise! The colors are absolutely stunning 🌅"
                    .to_string(),
                engagement: Engagement {
                    likes: 8,
                    comments: 2,
                    is_liked: false,
                },
            },
        },
    ]
}

/// The comment thread on the "Amazing Mountain Hike" trip.
pub fn comments() -> Vec<Comment> {
    let users = users();
    let now = Utc::now();

    vec![
        Comment {
            id: "1".to_string(),
            author: users[1].clone(),
            content: "Wow, those views are incredible! How was the weather during your hike?"
                .to_string(),
            timestamp: now - Duration::hours(1),
            likes: 3,
            is_liked: false,
            replies: vec![Comment {
                id: "1-1".to_string(),
                author: users[0].clone(),
                content: "The weather was perfect! Clear skies all morning.".to_string(),
                timestamp: now - Duration::minutes(45),
                likes: 1,
                is_liked: true,
                replies: Vec::new(),
            }],
        },
        Comment {
            id: "2".to_string(),
            author: users[2].clone(),
            content: "I've been wanting to do this hike for ages! Thanks for the inspiration. \
                      What gear did you bring?"
                .to_string(),
            timestamp: now - Duration::minutes(30),
            likes: 1,
            is_liked: true,
            replies: Vec::new(),
        },
        Comment {
            id: "3".to_string(),
            author: users[3].clone(),
            content: "Perfect timing for the sunrise shot! 📸 The colors are amazing.".to_string(),
            timestamp: now - Duration::minutes(15),
            likes: 2,
            is_liked: false,
            replies: Vec::new(),
        },
    ]
}
