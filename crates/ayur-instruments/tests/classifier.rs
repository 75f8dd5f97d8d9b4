use ayur_core::models::answer::AnswerSet;
use ayur_core::models::classification::ScoreBreakdown;
use ayur_core::models::dosha::Dosha;
use ayur_instruments::Instrument;
use ayur_instruments::instruments::prakriti::Prakriti;
use ayur_instruments::scoring::{BASE_SCORE, normalize};
use proptest::prelude::*;

fn vata_answers() -> AnswerSet {
    [
        ("body_frame", "Thin/Light"),
        ("skin_type", "Dry"),
        ("hair_type", "Dry/Thin"),
        ("appetite", "Variable"),
        ("digestion", "Quick/Variable"),
        ("sleep_pattern", "Light sleeper"),
        ("mental_state", "Anxious/Restless"),
        ("activity_level", "Very Active"),
        ("stress_level", "High"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn empty_answers_fall_back_to_base_ratio() {
    let result = Prakriti.classify(&AnswerSet::new());

    assert_eq!(result.scores, ScoreBreakdown::with_base(BASE_SCORE));
    // 33 + 33 + 33 = 99; the missing point goes to Vata.
    assert_eq!(result.percentages.vata, 34);
    assert_eq!(result.percentages.pitta, 33);
    assert_eq!(result.percentages.kapha, 33);
    assert_eq!(result.dominant, Dosha::Vata);
    assert_eq!(result.confidence, 34);
}

#[test]
fn vata_profile_is_dominant_vata() {
    let result = Prakriti.classify(&vata_answers());

    assert_eq!(result.scores.vata, 19);
    assert_eq!(result.scores.pitta, 2);
    assert_eq!(result.scores.kapha, 2);
    // 83 + 9 + 9 = 101; Vata gives one back.
    assert_eq!(result.percentages.vata, 82);
    assert_eq!(result.percentages.pitta, 9);
    assert_eq!(result.percentages.kapha, 9);
    assert_eq!(result.dominant, Dosha::Vata);
    assert_eq!(result.confidence, 82);
    assert!(result.confidence > 33);
}

#[test]
fn classification_is_deterministic() {
    let answers = vata_answers();
    assert_eq!(Prakriti.classify(&answers), Prakriti.classify(&answers));
}

#[test]
fn kapha_profile() {
    let answers: AnswerSet = [
        ("body_frame", "Heavy/Large"),
        ("skin_type", "Oily"),
        ("hair_type", "Oily/Thick"),
        ("appetite", "Low"),
        ("digestion", "Slow/Steady"),
        ("sleep_pattern", "Heavy sleeper"),
        ("mental_state", "Calm/Steady"),
        ("activity_level", "Sedentary"),
        ("stress_level", "Low"),
    ]
    .into_iter()
    .collect();

    let result = Prakriti.classify(&answers);
    assert_eq!(result.scores.kapha, 18);
    assert_eq!(result.dominant, Dosha::Kapha);
}

#[test]
fn pitta_leaning_mixed_profile() {
    let answers: AnswerSet = [
        ("body_frame", "Medium"),
        ("skin_type", "Normal"),
        ("appetite", "Strong"),
        ("digestion", "Strong/Fast"),
        ("mental_state", "Focused/Intense"),
        ("sleep_pattern", "Light sleeper"),
    ]
    .into_iter()
    .collect();

    let result = Prakriti.classify(&answers);
    // Pitta 2+3+1+2+2+2 = 12, Vata 2+2 = 4, Kapha 2.
    assert_eq!(result.scores.pitta, 12);
    assert_eq!(result.scores.vata, 4);
    assert_eq!(result.dominant, Dosha::Pitta);
    assert_eq!(result.percentages.pitta, 67);
    assert_eq!(result.percentages.vata, 22);
    assert_eq!(result.percentages.kapha, 11);
}

#[test]
fn unrecognized_values_contribute_nothing() {
    let mut answers: AnswerSet = [
        ("body_frame", "Enormous"),
        ("skin_type", ""),
        ("stress_level", "Moderate"),
        ("unrelated", "Thin/Light"),
    ]
    .into_iter()
    .collect();
    answers.insert_multi("mental_state", ["Anxious/Restless"]);

    let result = Prakriti.classify(&answers);
    assert_eq!(result.scores, ScoreBreakdown::with_base(BASE_SCORE));
}

#[test]
fn tie_between_top_doshas_goes_to_priority_order() {
    let answers: AnswerSet = [("body_frame", "Medium"), ("mental_state", "Calm/Steady")]
        .into_iter()
        .collect();
    // Vata 2, Pitta 5, Kapha 4: no tie, Pitta wins.
    assert_eq!(Prakriti.classify(&answers).dominant, Dosha::Pitta);

    let tied = ScoreBreakdown {
        vata: 2,
        pitta: 4,
        kapha: 4,
    };
    let percentages = normalize(&tied);
    assert_eq!(percentages.pitta, percentages.kapha);
    assert_eq!(ayur_instruments::scoring::dominant(&percentages), Dosha::Pitta);
}

#[test]
fn correction_never_pushes_a_share_below_zero() {
    // 0/8, 1/8, 7/8 round to 0, 13, 88 = 101. Vata cannot give the point
    // back, so Pitta does.
    let scores = ScoreBreakdown {
        vata: 0,
        pitta: 1,
        kapha: 7,
    };
    let p = normalize(&scores);
    assert_eq!((p.vata, p.pitta, p.kapha), (0, 12, 88));
    assert_eq!(p.total(), 100);
}

#[test]
fn zero_scores_normalize_evenly() {
    let p = normalize(&ScoreBreakdown::default());
    assert_eq!((p.vata, p.pitta, p.kapha), (34, 33, 33));
}

#[test]
fn half_shares_round_away_from_zero() {
    // 1/8 = 12.5% and 3/8 = 37.5%, 4/8 = 50%: 13 + 38 + 50 = 101.
    let p = normalize(&ScoreBreakdown {
        vata: 1,
        pitta: 3,
        kapha: 4,
    });
    assert_eq!((p.vata, p.pitta, p.kapha), (12, 38, 50));
}

fn optional_value(options: &'static [&'static str]) -> impl Strategy<Value = Option<&'static str>> {
    prop::option::of(prop::sample::select(options))
}

prop_compose! {
    fn arbitrary_answers()
        (
            frame in optional_value(&["Thin/Light", "Medium", "Heavy/Large", "Unknown"]),
            skin in optional_value(&["Dry", "Normal", "Combination", "Sensitive", "Oily"]),
            hair in optional_value(&["Dry/Thin", "Normal", "Fine/Early Graying", "Oily/Thick"]),
            appetite in optional_value(&["Variable", "Strong", "Moderate", "Low"]),
            digestion in optional_value(&["Quick/Variable", "Strong/Fast", "Slow/Steady"]),
            sleep in optional_value(&["Light sleeper", "Moderate sleeper", "Heavy sleeper"]),
            mental in optional_value(&["Anxious/Restless", "Focused/Intense", "Calm/Steady"]),
            activity in optional_value(&["Sedentary", "Light", "Moderate", "Active", "Very Active"]),
            stress in optional_value(&["Low", "Moderate", "High", "Severe"]),
        )
        -> AnswerSet
    {
        let fields = [
            ("body_frame", frame),
            ("skin_type", skin),
            ("hair_type", hair),
            ("appetite", appetite),
            ("digestion", digestion),
            ("sleep_pattern", sleep),
            ("mental_state", mental),
            ("activity_level", activity),
            ("stress_level", stress),
        ];
        fields
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k, v)))
            .collect()
    }
}

proptest! {
    #[test]
    fn prop_percentages_sum_to_100(answers in arbitrary_answers()) {
        let result = Prakriti.classify(&answers);
        prop_assert_eq!(result.percentages.total(), 100);
        for dosha in Dosha::ALL {
            prop_assert!(result.percentages.get(dosha) <= 100);
        }
    }

    #[test]
    fn prop_confidence_is_dominant_share(answers in arbitrary_answers()) {
        let result = Prakriti.classify(&answers);
        prop_assert_eq!(result.confidence, result.percentages.get(result.dominant));
        for dosha in Dosha::ALL {
            prop_assert!(result.confidence >= result.percentages.get(dosha));
        }
    }

    #[test]
    fn prop_every_dosha_keeps_a_share(answers in arbitrary_answers()) {
        let result = Prakriti.classify(&answers);
        for dosha in Dosha::ALL {
            prop_assert!(result.scores.get(dosha) >= BASE_SCORE);
            prop_assert!(result.percentages.get(dosha) > 0);
        }
    }

    #[test]
    fn prop_normalize_sums_to_100_for_any_scores(
        vata in 0u32..500, pitta in 0u32..500, kapha in 0u32..500
    ) {
        let p = normalize(&ScoreBreakdown { vata, pitta, kapha });
        prop_assert_eq!(p.total(), 100);
    }
}
