// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared fixtures for the scenario tests.

use chrono::NaiveDate;
use hackfinder::models::{
    Identity, Interest, InterestStatus, Post, PostKind, TeamMember, User,
};
use hackfinder::seed::SeedData;
use hackfinder::Session;

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[allow(dead_code)]
pub fn make_user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@hackfinder.in", id),
        avatar: format!("avatars/user-{}.png", id),
        bio: String::new(),
        skills: Vec::new(),
        roles: Vec::new(),
        experience: String::new(),
        location: String::new(),
        github: String::new(),
        linkedin: String::new(),
        verified: false,
    }
}

#[allow(dead_code)]
pub fn make_team_post(id: &str, owner: &User, roles_needed: &[&str], created: NaiveDate) -> Post {
    Post {
        id: id.to_string(),
        title: format!("Team post {}", id),
        description: "A team looking for new members to join the build.".to_string(),
        owner_id: owner.id.clone(),
        owner_name: owner.name.clone(),
        owner_avatar: owner.avatar.clone(),
        tech_tags: vec!["React".to_string(), "Node.js".to_string()],
        created_at: created,
        work_preference: None,
        time_commitment: None,
        duration: None,
        match_score: None,
        match_explanation: None,
        kind: PostKind::TeamSeekingMembers {
            roles_needed: roles_needed.iter().map(|r| r.to_string()).collect(),
            team_size: 1,
            team_capacity: 1 + roles_needed.len() as u32,
            current_members: None,
        },
    }
}

#[allow(dead_code)]
pub fn make_individual_post(
    id: &str,
    owner: &User,
    desired_roles: &[&str],
    created: NaiveDate,
) -> Post {
    Post {
        id: id.to_string(),
        title: format!("Individual post {}", id),
        description: "An individual looking for the right team.".to_string(),
        owner_id: owner.id.clone(),
        owner_name: owner.name.clone(),
        owner_avatar: owner.avatar.clone(),
        tech_tags: vec!["Figma".to_string()],
        created_at: created,
        work_preference: None,
        time_commitment: None,
        duration: None,
        match_score: None,
        match_explanation: None,
        kind: PostKind::IndividualSeekingTeam {
            desired_roles: desired_roles.iter().map(|r| r.to_string()).collect(),
        },
    }
}

#[allow(dead_code)]
pub fn make_interest(
    id: &str,
    user_id: &str,
    post_id: &str,
    status: InterestStatus,
    created: NaiveDate,
) -> Interest {
    Interest {
        id: id.to_string(),
        user_id: user_id.to_string(),
        post_id: post_id.to_string(),
        message: "Hi! I'd love to work with you on this.".to_string(),
        status,
        created_at: created,
        roles: Vec::new(),
    }
}

/// Overwrite a team post's headcount, capacity, and member list.
#[allow(dead_code)]
pub fn set_team_shape(post: &mut Post, size: u32, capacity: u32, members: &[(&str, &str)]) {
    if let PostKind::TeamSeekingMembers {
        team_size,
        team_capacity,
        current_members,
        ..
    } = &mut post.kind
    {
        *team_size = size;
        *team_capacity = capacity;
        *current_members = Some(
            members
                .iter()
                .map(|(name, role)| TeamMember {
                    name: name.to_string(),
                    role: role.to_string(),
                    avatar: "avatars/member.png".to_string(),
                })
                .collect(),
        );
    }
}

/// Seed mirroring the shipped fixture in miniature: three users, four
/// posts, two interests. The current user is Aditi (id "1").
///
/// Feed order: post 1 (team, owned by the current user), post 2
/// (individual, remote), post 3 (team with open ML/frontend roles),
/// post 4 (individual, no interest from the current user yet).
#[allow(dead_code)]
pub fn seed_data() -> SeedData {
    let aditi = make_user("1", "Aditi Sharma");
    let rohit = make_user("2", "Rohit Verma");
    let karan = make_user("3", "Karan Gupta");

    let mut post1 = make_team_post("1", &aditi, &["Frontend Developer"], date(2024, 1, 15));
    post1.tech_tags = vec![
        "React".to_string(),
        "TypeScript".to_string(),
        "D3.js".to_string(),
    ];
    post1.work_preference = Some("hybrid".to_string());
    set_team_shape(
        &mut post1,
        4,
        5,
        &[("Aditi Sharma", "Product Lead"), ("Rohan Desai", "AI Engineer")],
    );

    let mut post2 = make_individual_post(
        "2",
        &rohit,
        &["UI/UX Designer", "Frontend Developer"],
        date(2024, 1, 18),
    );
    post2.tech_tags = vec!["Figma".to_string(), "React".to_string()];
    post2.work_preference = Some("remote".to_string());

    let mut post3 = make_team_post(
        "3",
        &karan,
        &["ML Engineer", "Frontend Developer"],
        date(2024, 1, 20),
    );
    post3.tech_tags = vec![
        "Python".to_string(),
        "TensorFlow".to_string(),
        "React".to_string(),
    ];
    set_team_shape(
        &mut post3,
        3,
        5,
        &[("Karan Gupta", "Tech Lead"), ("Aditi Sharma", "Advisor")],
    );

    let post4 = make_individual_post("4", &rohit, &["Backend Engineer"], date(2024, 1, 21));

    let mut interest1 = make_interest("1", "2", "1", InterestStatus::Pending, date(2024, 1, 16));
    interest1.roles = vec!["Frontend Developer".to_string()];
    let interest2 = make_interest("2", "1", "2", InterestStatus::Accepted, date(2024, 1, 19));

    SeedData {
        current_user: Identity::from(&aditi),
        users: vec![aditi, rohit, karan],
        posts: vec![post1, post2, post3, post4],
        interests: vec![interest1, interest2],
    }
}

#[allow(dead_code)]
pub fn seeded_session() -> Session {
    Session::new(seed_data())
}
