use std::sync::Arc;
use std::time::Duration;

use remote::{Endpoint, InMemoryRepository, Remote, RemoteError, ScoreRepository};
use services::AppServices;
use trivia_core::model::{
    Category, CategoryId, Difficulty, Leaderboard, LeaderboardEntry, PlayerName, Question,
    QuizSelection, ScoreRecord,
};

use super::test_harness::{SlotSeed, ViewKind, setup_view_harness, test_services};
use crate::vm::{AnswerWait, MenuRequest, MenuVm, map_leaderboard, start_quiz};

/// A score endpoint that never answers.
struct HungScores;

#[async_trait::async_trait]
impl ScoreRepository for HungScores {
    async fn submit_score(&self, _record: &ScoreRecord) -> Result<(), RemoteError> {
        std::future::pending().await
    }
}

fn selection() -> QuizSelection {
    QuizSelection::new(CategoryId::from(9), Difficulty::Easy)
}

fn single_question_repo() -> InMemoryRepository {
    let repo = InMemoryRepository::new();
    repo.set_batch(
        selection(),
        vec![Question::new("2+2?", "4", vec!["3".into(), "5".into()]).unwrap()],
    )
    .unwrap();
    repo
}

#[tokio::test(flavor = "current_thread")]
async fn menu_view_smoke_lists_categories() {
    let repo = InMemoryRepository::new();
    repo.set_categories(vec![
        Category::new(CategoryId::from(9), "General Knowledge"),
        Category::new(CategoryId::from(23), "History"),
    ])
    .unwrap();

    let mut harness = setup_view_harness(ViewKind::Menu, &repo, SlotSeed::default());
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Trivia Quiz"), "missing title in {html}");
    assert!(html.contains("General Knowledge"), "missing category in {html}");
    assert!(html.contains("History"), "missing category in {html}");
    assert!(html.contains("Medium"), "missing difficulty in {html}");
    assert!(html.contains("Start Quiz"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn menu_view_smoke_offers_retry_when_categories_fail() {
    let repo = InMemoryRepository::new();
    repo.fail(Endpoint::Categories).unwrap();

    let mut harness = setup_view_harness(ViewKind::Menu, &repo, SlotSeed::default());
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(
        html.contains("Could not reach the trivia service"),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_question_and_score() {
    let repo = single_question_repo();
    let quiz_loop = test_services(&repo).quiz_loop();
    let vm = start_quiz(&quiz_loop, PlayerName::new("alice").unwrap(), selection())
        .await
        .unwrap();

    let seed = SlotSeed {
        quiz: Some(vm),
        ..SlotSeed::default()
    };
    let mut harness = setup_view_harness(ViewKind::Quiz, &repo, seed);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Score: 0/1"), "missing score in {html}");
    assert!(html.contains("2+2?"), "missing question in {html}");
    for idx in 0..3 {
        let id = format!("answer-{idx}");
        assert!(html.contains(&id), "missing {id} in {html}");
    }
    assert!(!html.contains("answer-3"), "extra choice in {html}");
    assert!(html.contains("Quit"), "missing quit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_completion() {
    let repo = single_question_repo();
    let quiz_loop = test_services(&repo).quiz_loop();
    let mut vm = start_quiz(&quiz_loop, PlayerName::new("alice").unwrap(), selection())
        .await
        .unwrap();
    vm.answer(&quiz_loop, "4").await.unwrap();

    let seed = SlotSeed {
        quiz: Some(vm),
        ..SlotSeed::default()
    };
    let mut harness = setup_view_harness(ViewKind::Quiz, &repo, seed);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Quiz Completed"), "missing title in {html}");
    assert!(html.contains("Your score: 1/1"), "missing score in {html}");
    assert!(html.contains("OK"), "missing dismiss in {html}");
    assert_eq!(repo.submitted_scores().unwrap().len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn menu_view_smoke_disables_actions_while_request_runs() {
    let repo = InMemoryRepository::new();
    let mut menu = MenuVm::default();
    menu.set_player_name("alice".to_string());
    menu.select_category("9");
    menu.select_difficulty("easy");
    assert!(menu.begin(MenuRequest::StartQuiz));

    let seed = SlotSeed {
        menu: Some(menu),
        ..SlotSeed::default()
    };
    let mut harness = setup_view_harness(ViewKind::Menu, &repo, seed);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Loading..."), "missing loading label in {html}");
    assert!(!html.contains("Start Quiz<"), "start label still shown in {html}");
    assert!(html.contains("disabled"), "actions not disabled in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_waits_while_score_submission_hangs() {
    let repo = single_question_repo();
    let mut remote = Remote::from_in_memory(repo.clone());
    remote.scores = Arc::new(HungScores);
    let quiz_loop = AppServices::new(&remote).quiz_loop();
    let mut vm = start_quiz(&quiz_loop, PlayerName::new("alice").unwrap(), selection())
        .await
        .unwrap();

    let wait = vm.answer_wait();
    assert_eq!(wait, AnswerWait::Submitting);
    let pending = tokio::time::timeout(Duration::from_millis(50), vm.answer(&quiz_loop, "4")).await;
    assert!(pending.is_err(), "submission should still be in flight");

    // The answer task holds the quiz, so the slot is empty while it waits.
    let seed = SlotSeed {
        answer_wait: Some(wait),
        ..SlotSeed::default()
    };
    let mut harness = setup_view_harness(ViewKind::Quiz, &repo, seed);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Submitting score..."), "missing wait notice in {html}");
    assert!(!html.contains("No quiz in progress."), "quiz reported missing in {html}");
    assert!(!html.contains("Back to Menu"), "navigation offered in {html}");
    assert!(!html.contains("Quit"), "quit offered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_without_quiz_links_back() {
    let repo = InMemoryRepository::new();
    let mut harness = setup_view_harness(ViewKind::Quiz, &repo, SlotSeed::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("No quiz in progress."), "missing notice in {html}");
    assert!(html.contains("Back to Menu"), "missing back button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn leaderboard_view_smoke_renders_ranked_rows() {
    let repo = InMemoryRepository::new();
    let board = Leaderboard::new(vec![
        LeaderboardEntry {
            username: "alice".into(),
            score: 9,
        },
        LeaderboardEntry {
            username: "bob".into(),
            score: 7,
        },
    ]);
    let seed = SlotSeed {
        leaderboard: Some(map_leaderboard(&selection(), &board)),
        ..SlotSeed::default()
    };

    let mut harness = setup_view_harness(ViewKind::Leaderboard, &repo, seed);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("1. alice: 9"), "missing first row in {html}");
    assert!(html.contains("2. bob: 7"), "missing second row in {html}");
    assert!(html.contains("Back"), "missing back button in {html}");
}
