use career_compass::catalog::{self, CareerPathId};
use career_compass::quiz::{Answer, MatchEngine, ScoringConfig};

fn answer_all(liked: bool) -> Vec<Answer> {
    catalog::quiz_questions()
        .iter()
        .map(|question| Answer::new(question.id, liked))
        .collect()
}

/// Like one question, dislike every other.
fn like_only(question_id: &str) -> Vec<Answer> {
    catalog::quiz_questions()
        .iter()
        .map(|question| Answer::new(question.id, question.id == question_id))
        .collect()
}

#[test]
fn results_are_capped_clamped_and_reason_limited() {
    let engine = MatchEngine::default();
    let sequences = [
        Vec::new(),
        answer_all(true),
        answer_all(false),
        like_only("q1"),
        vec![Answer::new("q7", true), Answer::new("q14", false)],
    ];

    for answers in &sequences {
        let matches = engine.compute_matches(answers);
        assert!(matches.len() <= 5);
        for entry in &matches {
            assert!(entry.score >= 0.0, "negative score for {:?}", entry.path);
            assert!(entry.reasons.len() <= 3);
        }
    }
}

#[test]
fn empty_quiz_yields_declared_order_at_zero() {
    let matches = MatchEngine::default().compute_matches(&[]);

    assert_eq!(matches.len(), 5);
    let expected: Vec<CareerPathId> = CareerPathId::ordered().into_iter().take(5).collect();
    for (entry, expected_id) in matches.iter().zip(expected) {
        assert_eq!(entry.path, expected_id);
        assert_eq!(entry.score, 0.0);
        assert!(entry.reasons.is_empty());
    }
}

#[test]
fn fully_disliked_quiz_clamps_every_score_to_zero() {
    let matches = MatchEngine::default().compute_matches(&answer_all(false));

    assert_eq!(matches.len(), 5);
    assert!(matches.iter().all(|entry| entry.score == 0.0));
    assert!(matches.iter().all(|entry| entry.reasons.is_empty()));
}

#[test]
fn liking_ui_question_ranks_frontend_over_untargeted_paths() {
    let matches = MatchEngine::default().compute_matches(&like_only("q1"));

    let frontend_score = matches
        .iter()
        .find(|entry| entry.path == CareerPathId::Frontend)
        .expect("frontend present in results")
        .score;

    // q1 signals frontend, full-stack, and mobile; everything else must
    // rank strictly below frontend.
    let targeted = [
        CareerPathId::Frontend,
        CareerPathId::FullStack,
        CareerPathId::Mobile,
    ];
    for entry in &matches {
        if !targeted.contains(&entry.path) {
            assert!(
                entry.score < frontend_score,
                "{:?} should score below frontend",
                entry.path
            );
        }
    }
    assert!(frontend_score > 0.0);
}

#[test]
fn disliked_answers_never_contribute_reasons() {
    // Dislike the UI question; its reason text must not surface anywhere
    // even though the dislike still dragged scores down.
    let mut answers = vec![Answer::new("q1", false)];
    answers.push(Answer::new("q9", true));

    let matches = MatchEngine::default().compute_matches(&answers);

    for entry in &matches {
        assert!(!entry
            .reasons
            .contains(&"You love building beautiful interfaces"));
    }

    let ml = matches
        .iter()
        .find(|entry| entry.path == CareerPathId::MlEngineer)
        .expect("ml-engineer present");
    assert!(ml
        .reasons
        .contains(&"You're excited about AI and machine learning"));
}

#[test]
fn computation_is_deterministic_and_idempotent() {
    let engine = MatchEngine::default();
    let answers = answer_all(true);

    let first = engine.compute_matches(&answers);
    let second = engine.compute_matches(&answers);
    assert_eq!(first, second);
}

#[test]
fn ties_preserve_declared_path_order() {
    let matches = MatchEngine::default().compute_matches(&answer_all(true));

    let ranking: Vec<CareerPathId> = matches.iter().map(|entry| entry.path).collect();
    // backend leads outright; full-stack and frontend tie at the next
    // score and keep declaration order, as do mobile and game-dev.
    assert_eq!(
        ranking,
        vec![
            CareerPathId::Backend,
            CareerPathId::FullStack,
            CareerPathId::Frontend,
            CareerPathId::Mobile,
            CareerPathId::GameDev,
        ]
    );
}

#[test]
fn unknown_question_ids_are_skipped_not_fatal() {
    let engine = MatchEngine::default();
    let with_stray = vec![
        Answer::new("q99", true),
        Answer::new("q10", true),
        Answer::new("not-a-question", false),
    ];
    let without_stray = vec![Answer::new("q10", true)];

    assert_eq!(
        engine.compute_matches(&with_stray),
        engine.compute_matches(&without_stray)
    );
}

#[test]
fn partial_answer_prefixes_are_valid_input() {
    let engine = MatchEngine::default();
    let answers = vec![Answer::new("q5", true), Answer::new("q15", true)];

    let matches = engine.compute_matches(&answers);
    assert_eq!(matches[0].path, CareerPathId::Devops);
    assert_eq!(matches[0].score, 5.0);
    assert_eq!(matches[1].path, CareerPathId::CloudArchitect);
    assert_eq!(matches[1].score, 5.0);
}

#[test]
fn custom_config_changes_caps() {
    let engine = MatchEngine::new(ScoringConfig {
        max_matches: 3,
        max_reasons: 1,
        ..ScoringConfig::default()
    });

    let matches = engine.compute_matches(&answer_all(true));
    assert_eq!(matches.len(), 3);
    assert!(matches.iter().all(|entry| entry.reasons.len() <= 1));
}
