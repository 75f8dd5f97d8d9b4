use ayur_core::models::dosha::Dosha;
use ayur_instruments::error::IntakeError;
use ayur_instruments::instruments::prakriti::NO_CONDITIONS;
use ayur_instruments::session::IntakeSession;

fn fill_demographics(session: &mut IntakeSession) {
    session.set_value("patient_name", "Asha Rao").unwrap();
    session.set_value("age", "34").unwrap();
    session.set_value("gender", "Female").unwrap();
}

fn fill_vitals(session: &mut IntakeSession) {
    session.set_value("height", "162").unwrap();
    session.set_value("weight", "55").unwrap();
}

fn fill_lifestyle(session: &mut IntakeSession) {
    session.set_value("activity_level", "Very Active").unwrap();
    session.set_value("stress_level", "High").unwrap();
}

fn fill_ayurvedic(session: &mut IntakeSession) {
    for (field, value) in [
        ("body_frame", "Thin/Light"),
        ("skin_type", "Dry"),
        ("hair_type", "Dry/Thin"),
        ("appetite", "Variable"),
        ("digestion", "Quick/Variable"),
        ("sleep_pattern", "Light sleeper"),
        ("mental_state", "Anxious/Restless"),
    ] {
        session.set_value(field, value).unwrap();
    }
}

fn walk_to_final_step(session: &mut IntakeSession) {
    fill_demographics(session);
    session.advance().unwrap();
    fill_vitals(session);
    session.advance().unwrap();
    fill_lifestyle(session);
    session.advance().unwrap();
    fill_ayurvedic(session);
    session.advance().unwrap();
}

#[test]
fn new_session_starts_at_step_one() {
    let session = IntakeSession::prakriti();
    assert_eq!(session.current_step(), 1);
    assert_eq!(session.step_count(), 5);
    assert_eq!(session.progress_percent(), 20);
    assert!(!session.can_retreat());
    assert!(!session.is_complete());
    assert!(session.answers().is_empty());
}

#[test]
fn advance_with_missing_field_reports_first_in_order() {
    let mut session = IntakeSession::prakriti();
    session.set_value("gender", "Male").unwrap();

    let err = session.advance().unwrap_err();
    assert_eq!(
        err,
        IntakeError::MissingRequiredField {
            step: 1,
            field: "patient_name".to_string(),
            label: "Full Name".to_string(),
        }
    );
    assert_eq!(err.to_string(), "Please fill in: Full Name");
    assert_eq!(session.current_step(), 1);
    assert!(session.answers().is_empty());
}

#[test]
fn whitespace_does_not_satisfy_required_field() {
    let mut session = IntakeSession::prakriti();
    session.set_value("patient_name", "Asha").unwrap();
    session.set_value("age", "   ").unwrap();
    session.set_value("gender", "Female").unwrap();

    match session.validate_step(1) {
        Err(IntakeError::MissingRequiredField { field, .. }) => assert_eq!(field, "age"),
        other => panic!("expected missing age, got {other:?}"),
    }
}

#[test]
fn advance_collects_and_moves_forward() {
    let mut session = IntakeSession::prakriti();
    fill_demographics(&mut session);
    session.set_value("occupation", "").unwrap();

    assert_eq!(session.advance().unwrap(), 2);
    assert_eq!(session.answers().single("patient_name"), Some("Asha Rao"));
    assert!(!session.answers().contains("occupation"));
    assert!(!session.answers().contains("mobile"));
    assert_eq!(session.step().id, "vitals");
}

#[test]
fn retreat_keeps_collected_answers() {
    let mut session = IntakeSession::prakriti();
    fill_demographics(&mut session);
    session.advance().unwrap();

    assert_eq!(session.retreat(), 1);
    assert_eq!(session.answers().single("age"), Some("34"));
    assert_eq!(session.retreat(), 1);
}

#[test]
fn revisiting_a_step_overwrites_its_answers() {
    let mut session = IntakeSession::prakriti();
    fill_demographics(&mut session);
    session.set_value("mobile", "+91-9000000000").unwrap();
    session.advance().unwrap();
    session.retreat();

    session.set_value("age", "35").unwrap();
    session.set_value("mobile", "").unwrap();
    session.advance().unwrap();

    assert_eq!(session.answers().single("age"), Some("35"));
    assert!(!session.answers().contains("mobile"));
}

#[test]
fn advance_on_final_step_does_not_complete() {
    let mut session = IntakeSession::prakriti();
    walk_to_final_step(&mut session);
    assert!(session.is_final_step());

    assert_eq!(session.advance().unwrap(), 5);
    assert!(!session.is_complete());
}

#[test]
fn submit_before_final_step_fails() {
    let mut session = IntakeSession::prakriti();
    fill_demographics(&mut session);
    assert_eq!(
        session.submit().unwrap_err(),
        IntakeError::NotOnFinalStep { current: 1 }
    );
}

#[test]
fn full_walkthrough_classifies_as_vata() {
    let mut session = IntakeSession::prakriti();
    walk_to_final_step(&mut session);
    session.set_checked("conditions", "Asthma", true).unwrap();

    let answers = session.submit().unwrap().clone();
    assert!(session.is_complete());
    assert_eq!(answers.multi("conditions").unwrap().len(), 1);

    let result = session.instrument().classify(&answers);
    assert_eq!(result.dominant, Dosha::Vata);
    assert_eq!(result.confidence, 82);
}

#[test]
fn completed_session_rejects_further_changes() {
    let mut session = IntakeSession::prakriti();
    walk_to_final_step(&mut session);
    session.submit().unwrap();

    assert_eq!(session.submit().unwrap_err(), IntakeError::AlreadySubmitted);
    assert_eq!(session.advance().unwrap_err(), IntakeError::AlreadySubmitted);
    assert_eq!(
        session.set_value("allergies", "Pollen").unwrap_err(),
        IntakeError::AlreadySubmitted
    );
    assert_eq!(session.retreat(), 5);
}

#[test]
fn start_discards_everything() {
    let mut session = IntakeSession::prakriti();
    walk_to_final_step(&mut session);
    session.submit().unwrap();

    session.start();
    assert_eq!(session.current_step(), 1);
    assert!(session.answers().is_empty());
    assert!(!session.is_complete());
    assert_eq!(session.form().value("patient_name"), "");
}

#[test]
fn no_conditions_sentinel_clears_other_selections() {
    let mut session = IntakeSession::prakriti();
    session.set_checked("conditions", "Diabetes", true).unwrap();
    session.set_checked("conditions", "Asthma", true).unwrap();
    session.set_checked("conditions", NO_CONDITIONS, true).unwrap();

    let checked = session.form().checked("conditions").unwrap();
    assert_eq!(checked.len(), 1);
    assert!(checked.contains(NO_CONDITIONS));
}

#[test]
fn other_condition_clears_sentinel() {
    let mut session = IntakeSession::prakriti();
    session.set_checked("conditions", NO_CONDITIONS, true).unwrap();
    session.set_checked("conditions", "Thyroid", true).unwrap();

    assert!(!session.form().is_checked("conditions", NO_CONDITIONS));
    assert!(session.form().is_checked("conditions", "Thyroid"));
}

#[test]
fn unchecking_removes_a_selection() {
    let mut session = IntakeSession::prakriti();
    session.set_checked("conditions", "Thyroid", true).unwrap();
    session.set_checked("conditions", "Thyroid", false).unwrap();
    assert!(session.form().checked("conditions").is_none());
}

#[test]
fn collected_conditions_replace_prior_set() {
    let mut session = IntakeSession::prakriti();
    walk_to_final_step(&mut session);
    session.set_checked("conditions", "Diabetes", true).unwrap();
    session.advance().unwrap();
    session.set_checked("conditions", NO_CONDITIONS, true).unwrap();
    session.advance().unwrap();

    let conditions = session.answers().multi("conditions").unwrap();
    assert_eq!(conditions.iter().collect::<Vec<_>>(), [NO_CONDITIONS]);
}

#[test]
fn input_kind_must_match_field() {
    let mut session = IntakeSession::prakriti();
    assert_eq!(
        session.set_value("conditions", "Asthma").unwrap_err(),
        IntakeError::FieldKindMismatch("conditions".to_string())
    );
    assert_eq!(
        session.set_checked("gender", "Male", true).unwrap_err(),
        IntakeError::FieldKindMismatch("gender".to_string())
    );
    assert_eq!(
        session.set_value("favourite_colour", "Blue").unwrap_err(),
        IntakeError::UnknownField("favourite_colour".to_string())
    );
}

#[test]
fn validating_unknown_step_fails() {
    let session = IntakeSession::prakriti();
    assert_eq!(session.validate_step(0), Err(IntakeError::UnknownStep(0)));
    assert_eq!(session.validate_step(6), Err(IntakeError::UnknownStep(6)));
}
