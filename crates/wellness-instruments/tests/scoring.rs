use wellness_core::models::{Identity, StressLevel, SubScores};
use wellness_instruments::scoring::{assess, classify, is_consistent, score};

#[test]
fn boundary_totals_classify_exactly() {
    let table = [
        (4, StressLevel::Low),
        (8, StressLevel::Low),
        (9, StressLevel::Moderate),
        (12, StressLevel::Moderate),
        (13, StressLevel::High),
        (16, StressLevel::High),
        (17, StressLevel::Severe),
        (20, StressLevel::Severe),
    ];

    for (total, expected) in table {
        assert_eq!(classify(total), expected, "total {total}");
    }
}

#[test]
fn classification_never_decreases_in_severity() {
    let levels: Vec<StressLevel> = (4..=20).map(classify).collect();
    assert!(levels.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(levels.first(), Some(&StressLevel::Low));
    assert_eq!(levels.last(), Some(&StressLevel::Severe));
}

#[test]
fn out_of_domain_totals_still_classify() {
    assert_eq!(classify(0), StressLevel::Low);
    assert_eq!(classify(-40), StressLevel::Low);
    assert_eq!(classify(21), StressLevel::Severe);
    assert_eq!(classify(i64::MAX), StressLevel::Severe);
    assert_eq!(classify(i64::MIN), StressLevel::Low);
}

#[test]
fn score_is_the_sum_of_ratings() {
    for a in 1..=5 {
        for b in 1..=5 {
            for c in 1..=5 {
                for d in 1..=5 {
                    let sub_scores = SubScores::new(a, b, c, d).unwrap();
                    assert_eq!(i64::from(score(&sub_scores)), a + b + c + d);
                }
            }
        }
    }
}

#[test]
fn assess_derives_total_and_level_for_anonymous_session() {
    let identity = Identity::Session("session-1".to_string());
    let assessment = assess(SubScores::new(3, 2, 4, 3).unwrap(), &identity);

    assert_eq!(assessment.total_score, 12);
    assert_eq!(assessment.stress_level, StressLevel::Moderate);
    assert_eq!(assessment.user_id, None);
    assert_eq!(assessment.session_id.as_deref(), Some("session-1"));
    assert!(is_consistent(&assessment));
}

#[test]
fn assess_attributes_authenticated_user_only() {
    let identity = Identity::User("user-42".to_string());
    let assessment = assess(SubScores::new(4, 4, 5, 4).unwrap(), &identity);

    assert_eq!(assessment.total_score, 17);
    assert_eq!(assessment.stress_level, StressLevel::Severe);
    assert_eq!(assessment.user_id.as_deref(), Some("user-42"));
    assert_eq!(assessment.session_id, None);
}

#[test]
fn assess_gives_each_record_a_fresh_id() {
    let identity = Identity::User("user-42".to_string());
    let sub_scores = SubScores::new(1, 1, 1, 1).unwrap();
    let first = assess(sub_scores, &identity);
    let second = assess(sub_scores, &identity);
    assert_ne!(first.id, second.id);
}

#[test]
fn tampered_records_are_inconsistent() {
    let identity = Identity::User("user-42".to_string());
    let assessment = assess(SubScores::new(2, 2, 2, 2).unwrap(), &identity);

    let mut wrong_total = assessment.clone();
    wrong_total.total_score = 9;
    assert!(!is_consistent(&wrong_total));

    let mut wrong_level = assessment.clone();
    wrong_level.stress_level = StressLevel::High;
    assert!(!is_consistent(&wrong_level));

    let mut wrong_rating = assessment;
    wrong_rating.work_pressure_score = 0;
    wrong_rating.total_score = 6;
    wrong_rating.stress_level = StressLevel::Low;
    assert!(!is_consistent(&wrong_rating));
}
