use super::*;

#[test]
fn empty_config_resolves_to_defaults() {
    let parameters = DragToScrollConfig::new().resolve().expect("defaults are valid");

    assert_eq!(parameters, DragToScrollParameters::default());
    assert_eq!(parameters.direction, Direction::BOTH);
    assert_eq!(parameters.animation.timing, AnimationTiming::new(1500.0, 4.0, 10.0));
    assert!(parameters.animation.slide);
    assert!(parameters.prevent_default);
    assert!(parameters.stop_propagation);
}

#[test]
fn custom_values_override_defaults() {
    let parameters = DragToScrollConfig::new()
        .with_direction_x(true)
        .with_direction_y(false)
        .with_duration(2000.0)
        .with_easing_factor(5.0)
        .with_max_speed(15.0)
        .with_slide(false)
        .with_prevent_default(false)
        .with_stop_propagation(false)
        .resolve()
        .expect("valid config");

    assert_eq!(
        parameters,
        DragToScrollParameters {
            direction: Direction::HORIZONTAL,
            animation: AnimationParameters {
                timing: AnimationTiming::new(2000.0, 5.0, 15.0),
                slide: false,
            },
            prevent_default: false,
            stop_propagation: false,
        }
    );
}

#[test]
fn partial_timing_keeps_other_defaults() {
    let parameters = DragToScrollConfig::new()
        .with_easing_factor(2.0)
        .resolve()
        .expect("valid config");

    assert_eq!(parameters.animation.timing, AnimationTiming::new(1500.0, 2.0, 10.0));
    assert!(parameters.animation.slide);
}

#[test]
fn single_direction_axis_excludes_the_other() {
    let only_y = DragToScrollConfig::new().with_direction_x(false).resolve().unwrap();
    let only_x = DragToScrollConfig::new().with_direction_y(false).resolve().unwrap();
    let y_enabled = DragToScrollConfig::new().with_direction_y(true).resolve().unwrap();

    assert_eq!(only_y.direction, Direction::VERTICAL);
    assert_eq!(only_x.direction, Direction::HORIZONTAL);
    assert_eq!(y_enabled.direction, Direction::VERTICAL);
}

#[test]
fn out_of_range_values_are_all_reported() {
    let error = DragToScrollConfig::new()
        .with_duration(-1.0)
        .with_easing_factor(0.5)
        .with_max_speed(-3.0)
        .resolve()
        .expect_err("invalid config");

    let properties: Vec<_> = error.violations().iter().map(|v| v.property).collect();
    assert_eq!(
        properties,
        [
            "animation.timing.duration",
            "animation.timing.easingFactor",
            "animation.timing.maxSpeed"
        ]
    );
    assert_eq!(
        error.to_string(),
        "3 errors found in user configurations:\n\
         \t'animation.timing.duration' can't be less than 0, received -1\n\
         \t'animation.timing.easingFactor' can't be less than 1, received 0.5\n\
         \t'animation.timing.maxSpeed' can't be less than 0, received -3"
    );
}

#[test]
fn single_violation_message_is_singular() {
    let error = DragToScrollConfig::new()
        .with_easing_factor(0.0)
        .resolve()
        .expect_err("easing below 1");

    assert_eq!(
        error.to_string(),
        "1 error found in user configurations:\n\t'animation.timing.easingFactor' can't be less than 1, received 0"
    );
}

#[test]
fn non_finite_numbers_are_rejected() {
    let error = DragToScrollConfig::new()
        .with_duration(f64::NAN)
        .with_max_speed(f64::INFINITY)
        .resolve()
        .expect_err("non-finite values");

    let violations = error.violations();
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0].expected, "a finite (number)");
    assert_eq!(violations[1].property, "animation.timing.maxSpeed");
}

#[test]
fn boundary_values_are_accepted() {
    let parameters = DragToScrollConfig::new()
        .with_duration(0.0)
        .with_easing_factor(1.0)
        .with_max_speed(0.0)
        .resolve()
        .expect("boundaries are inclusive");

    assert_eq!(parameters.animation.timing, AnimationTiming::new(0.0, 1.0, 0.0));
    assert!(parameters.validate().is_ok());
}

#[test]
fn parameters_validate_catches_hand_built_values() {
    let mut parameters = DragToScrollParameters::default();
    parameters.animation.timing.easing_factor = 0.9;

    assert!(matches!(parameters.validate(), Err(ConfigError::Invalid(v)) if v.len() == 1));
}

#[cfg(feature = "serde")]
#[test]
fn json_config_uses_camel_case_keys() {
    let config = DragToScrollConfig::from_json(
        r#"{
            "direction": { "y": true },
            "animation": { "timing": { "easingFactor": 5, "maxSpeed": 15 }, "slide": false },
            "preventDefault": false
        }"#,
    )
    .expect("valid json");

    let parameters = config.resolve().expect("valid values");
    assert_eq!(parameters.direction, Direction::VERTICAL);
    assert_eq!(parameters.animation.timing, AnimationTiming::new(1500.0, 5.0, 15.0));
    assert!(!parameters.animation.slide);
    assert!(!parameters.prevent_default);
    assert!(parameters.stop_propagation);
}

#[cfg(feature = "serde")]
#[test]
fn json_type_errors_are_parse_errors() {
    let wrong_type = DragToScrollConfig::from_json(r#"{ "preventDefault": "yes" }"#);
    let unknown_field = DragToScrollConfig::from_json(r#"{ "bounce": true }"#);

    assert!(matches!(wrong_type, Err(ConfigError::Parse(_))));
    assert!(matches!(unknown_field, Err(ConfigError::Parse(_))));
}

#[cfg(feature = "serde")]
#[test]
fn json_document_matches_builder() {
    let document = serde_json::json!({
        "direction": { "x": true, "y": true },
        "animation": { "timing": { "duration": 900, "maxSpeed": 4.5 } },
        "stopPropagation": false
    });

    let parsed = DragToScrollConfig::from_json(&document.to_string()).expect("valid json");
    let built = DragToScrollConfig::new()
        .with_direction_x(true)
        .with_direction_y(true)
        .with_duration(900.0)
        .with_max_speed(4.5)
        .with_stop_propagation(false);

    assert_eq!(parsed, built);
}
