//! Integration tests for the repository layer against a real database:
//! - Registration creates the user and exactly one profile atomically
//! - Owner scoping: one user's rows are invisible to another
//! - Unique constraint violations (username, second profile)
//! - Enrichment completion methods on speech transcripts

use sqlx::PgPool;
use starlus_core::enrichment::{STATUS_DONE, STATUS_FAILED, STATUS_PENDING};
use starlus_db::models::calculation::NewCalculation;
use starlus_db::models::note::{CreateNote, UpdateNote};
use starlus_db::models::speech_transcript::NewSpeechTranscript;
use starlus_db::models::user::CreateUser;
use starlus_db::repositories::{
    CalculationRepo, NoteRepo, ProfileRepo, SpeechRepo, UserRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: "$argon2id$fake-hash-for-tests".to_string(),
        first_name: String::new(),
        last_name: String::new(),
    }
}

fn new_note(title: &str) -> CreateNote {
    CreateNote {
        title: title.to_string(),
        content: "content".to_string(),
        is_exam_mode: None,
    }
}

// ---------------------------------------------------------------------------
// Registration and profile invariants
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn registration_creates_exactly_one_profile(pool: PgPool) {
    let user = UserRepo::create_with_profile(&pool, &new_user("alice"))
        .await
        .expect("registration should succeed");

    let profiles = ProfileRepo::list_for_user(&pool, user.id)
        .await
        .expect("listing profiles should succeed");
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].user_id, user.id);
    assert_eq!(profiles[0].bio, "");
    assert!(profiles[0].picture_path.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_username_is_rejected(pool: PgPool) {
    UserRepo::create_with_profile(&pool, &new_user("bob"))
        .await
        .expect("first registration should succeed");

    let mut dup = new_user("bob");
    dup.email = "different@test.com".to_string();
    let err = UserRepo::create_with_profile(&pool, &dup)
        .await
        .expect_err("duplicate username must fail");
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn second_profile_for_same_user_is_rejected(pool: PgPool) {
    let user = UserRepo::create_with_profile(&pool, &new_user("carol"))
        .await
        .expect("registration should succeed");

    let result = sqlx::query("INSERT INTO user_profiles (user_id) VALUES ($1)")
        .bind(user.id)
        .execute(&pool)
        .await;
    assert!(result.is_err(), "unique index must reject a second profile");
}

// ---------------------------------------------------------------------------
// Owner scoping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn notes_are_invisible_across_users(pool: PgPool) {
    let alice = UserRepo::create_with_profile(&pool, &new_user("alice"))
        .await
        .expect("registration should succeed");
    let bob = UserRepo::create_with_profile(&pool, &new_user("bob"))
        .await
        .expect("registration should succeed");

    let alice_note = NoteRepo::create(&pool, alice.id, &new_note("alice's note"))
        .await
        .expect("create should succeed");
    NoteRepo::create(&pool, bob.id, &new_note("bob's note"))
        .await
        .expect("create should succeed");

    let listed = NoteRepo::list_for_user(&pool, alice.id)
        .await
        .expect("list should succeed");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "alice's note");

    // Bob cannot see, update, or delete Alice's note by id.
    let fetched = NoteRepo::find_for_user(&pool, alice_note.id, bob.id)
        .await
        .expect("find should succeed");
    assert!(fetched.is_none());

    let update = UpdateNote {
        title: Some("hijacked".to_string()),
        content: None,
        is_exam_mode: None,
    };
    let updated = NoteRepo::update_for_user(&pool, alice_note.id, bob.id, &update)
        .await
        .expect("update should succeed");
    assert!(updated.is_none());

    let deleted = NoteRepo::delete_for_user(&pool, alice_note.id, bob.id)
        .await
        .expect("delete should succeed");
    assert!(!deleted);

    // The note is untouched for its owner.
    let still_there = NoteRepo::find_for_user(&pool, alice_note.id, alice.id)
        .await
        .expect("find should succeed")
        .expect("owner must still see the note");
    assert_eq!(still_there.title, "alice's note");
}

#[sqlx::test(migrations = "./migrations")]
async fn calculations_are_owner_scoped(pool: PgPool) {
    let alice = UserRepo::create_with_profile(&pool, &new_user("alice"))
        .await
        .expect("registration should succeed");
    let bob = UserRepo::create_with_profile(&pool, &new_user("bob"))
        .await
        .expect("registration should succeed");

    let calc = CalculationRepo::create(
        &pool,
        alice.id,
        &NewCalculation {
            expression: "2+2".to_string(),
            status: STATUS_DONE.to_string(),
            result: Some("4".to_string()),
            error: None,
        },
    )
    .await
    .expect("create should succeed");

    assert!(CalculationRepo::find_for_user(&pool, calc.id, bob.id)
        .await
        .expect("find should succeed")
        .is_none());
    assert!(CalculationRepo::list_for_user(&pool, bob.id)
        .await
        .expect("list should succeed")
        .is_empty());
}

// ---------------------------------------------------------------------------
// Speech transcript lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn speech_transcript_settles_to_done(pool: PgPool) {
    let user = UserRepo::create_with_profile(&pool, &new_user("dora"))
        .await
        .expect("registration should succeed");

    let transcript = SpeechRepo::create(
        &pool,
        user.id,
        &NewSpeechTranscript {
            audio_path: "speech/test.wav".to_string(),
        },
    )
    .await
    .expect("create should succeed");
    assert_eq!(transcript.status, STATUS_PENDING);
    assert!(transcript.transcribed_text.is_none());

    SpeechRepo::mark_done(&pool, transcript.id, "hello world")
        .await
        .expect("mark_done should succeed");

    let settled = SpeechRepo::find_for_user(&pool, transcript.id, user.id)
        .await
        .expect("find should succeed")
        .expect("record must exist");
    assert_eq!(settled.status, STATUS_DONE);
    assert_eq!(settled.transcribed_text.as_deref(), Some("hello world"));
    assert!(settled.error.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn failed_transcript_stays_retrievable(pool: PgPool) {
    let user = UserRepo::create_with_profile(&pool, &new_user("ed"))
        .await
        .expect("registration should succeed");

    let transcript = SpeechRepo::create(
        &pool,
        user.id,
        &NewSpeechTranscript {
            audio_path: "speech/garbage.wav".to_string(),
        },
    )
    .await
    .expect("create should succeed");

    SpeechRepo::mark_failed(&pool, transcript.id, "unreadable payload: not audio")
        .await
        .expect("mark_failed should succeed");

    let settled = SpeechRepo::find_for_user(&pool, transcript.id, user.id)
        .await
        .expect("find should succeed")
        .expect("failed records must remain retrievable");
    assert_eq!(settled.status, STATUS_FAILED);
    assert!(settled.transcribed_text.is_none());
    assert_eq!(
        settled.error.as_deref(),
        Some("unreadable payload: not audio")
    );
}
