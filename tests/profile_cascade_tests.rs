// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile editing and the denormalized display-field cascade.

mod common;

use common::{seed_data, seeded_session};
use hackfinder::services::ProfileUpdate;
use hackfinder::Session;

fn rename(id: &str, name: &str) -> ProfileUpdate {
    ProfileUpdate {
        id: id.to_string(),
        name: Some(name.to_string()),
        ..ProfileUpdate::default()
    }
}

#[test]
fn test_renaming_the_current_user_updates_record_identity_and_posts() {
    let mut session = seeded_session();

    assert!(session.update_profile(rename("1", "Aditi S.")));

    assert_eq!(session.user("1").map(|u| u.name.as_str()), Some("Aditi S."));
    assert_eq!(session.identity().name, "Aditi S.");
    // Owned post refreshed; posts owned by other users untouched.
    assert_eq!(session.post("1").unwrap().owner_name, "Aditi S.");
    assert_eq!(session.post("2").unwrap().owner_name, "Rohit Verma");
    assert_eq!(session.post("3").unwrap().owner_name, "Karan Gupta");
}

#[test]
fn test_member_entries_are_rewritten_by_previous_name() {
    let mut session = seeded_session();

    let update = ProfileUpdate {
        id: "1".to_string(),
        name: Some("Aditi S.".to_string()),
        avatar: Some("avatars/new.png".to_string()),
        ..ProfileUpdate::default()
    };
    assert!(session.update_profile(update));

    // "Aditi Sharma" appears in the member lists of post 1 and post 3;
    // both entries are rewritten, other members are left alone.
    let members = session.post("1").unwrap().members().unwrap();
    assert_eq!(members[0].name, "Aditi S.");
    assert_eq!(members[0].avatar, "avatars/new.png");
    assert_eq!(members[1].name, "Rohan Desai");

    let members = session.post("3").unwrap().members().unwrap();
    assert_eq!(members[0].name, "Karan Gupta");
    assert_eq!(members[1].name, "Aditi S.");
}

#[test]
fn test_renaming_another_user_leaves_the_identity_alone() {
    let mut session = seeded_session();

    assert!(session.update_profile(rename("3", "Karan G.")));

    assert_eq!(session.identity().name, "Aditi Sharma");
    assert_eq!(session.post("3").unwrap().owner_name, "Karan G.");
    assert_eq!(session.post("1").unwrap().owner_name, "Aditi Sharma");
}

#[test]
fn test_omitted_lists_are_kept_but_explicit_empty_clears() {
    let mut session = seeded_session();

    let update = ProfileUpdate {
        id: "1".to_string(),
        skills: Some(vec!["Rust".to_string()]),
        ..ProfileUpdate::default()
    };
    assert!(session.update_profile(update));
    assert_eq!(session.user("1").unwrap().skills, vec!["Rust".to_string()]);

    // Omitting skills keeps them.
    assert!(session.update_profile(rename("1", "Aditi S.")));
    assert_eq!(session.user("1").unwrap().skills, vec!["Rust".to_string()]);

    // An explicit empty list clears them.
    let update = ProfileUpdate {
        id: "1".to_string(),
        skills: Some(Vec::new()),
        ..ProfileUpdate::default()
    };
    assert!(session.update_profile(update));
    assert!(session.user("1").unwrap().skills.is_empty());
}

#[test]
fn test_unknown_target_is_a_noop() {
    let mut session = seeded_session();

    assert!(!session.update_profile(rename("99", "Nobody")));
    assert!(session.user("99").is_none());

    assert!(!session.update_profile(rename("", "Nobody")));
}

#[test]
fn test_first_edit_starts_from_the_synthesized_profile() {
    // A session whose current user has no stored profile yet.
    let mut seed = seed_data();
    seed.users.retain(|u| u.id != "1");
    let mut session = Session::new(seed);

    // Reading the profile synthesizes it without persisting anything.
    let profile = session.current_profile();
    assert_eq!(profile.name, "Aditi Sharma");
    assert!(!profile.verified);
    assert!(session.user("1").is_none());

    // The first edit merges onto the synthesized default and persists.
    let update = ProfileUpdate {
        id: "1".to_string(),
        bio: Some("Full-stack developer".to_string()),
        ..ProfileUpdate::default()
    };
    assert!(session.update_profile(update));

    let stored = session.user("1").expect("Profile should now be stored");
    assert_eq!(stored.bio, "Full-stack developer");
    assert_eq!(stored.name, "Aditi Sharma");
    assert!(stored.skills.is_empty());
}

#[test]
fn test_avatar_falls_back_to_the_identity_avatar() {
    let mut session = seeded_session();
    let identity_avatar = session.identity().avatar.clone();

    // An explicitly empty avatar falls back along the chain to the acting
    // user's current avatar.
    let update = ProfileUpdate {
        id: "1".to_string(),
        avatar: Some(String::new()),
        ..ProfileUpdate::default()
    };
    assert!(session.update_profile(update));
    assert_eq!(session.user("1").unwrap().avatar, identity_avatar);
}

#[test]
fn test_avatar_update_cascades_to_owned_posts() {
    let mut session = seeded_session();

    let update = ProfileUpdate {
        id: "1".to_string(),
        avatar: Some("avatars/fresh.png".to_string()),
        ..ProfileUpdate::default()
    };
    assert!(session.update_profile(update));

    assert_eq!(session.identity().avatar, "avatars/fresh.png");
    assert_eq!(session.post("1").unwrap().owner_avatar, "avatars/fresh.png");
    assert_eq!(session.post("2").unwrap().owner_avatar, "avatars/user-2.png");
}
