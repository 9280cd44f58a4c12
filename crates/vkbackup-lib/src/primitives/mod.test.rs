use super::*;

macro_rules! test_enum_completeness {
    ($enum_type:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            for variant in <$enum_type>::value_variants() {
                let possible_value = variant.to_possible_value();
                assert!(
                    possible_value.is_some(),
                    "PossibleValue should exist for all variants"
                );

                let possible_val = possible_value.unwrap();
                let primary_name = possible_val.get_name();
                let parsed: Result<$enum_type, _> = primary_name.parse();
                assert_eq!(
                    parsed.unwrap(),
                    *variant,
                    "Round-trip should preserve variant"
                );
            }
        }
    };
}

test_enum_completeness!(LogLevel, test_log_level_completeness);
test_enum_completeness!(LogFormat, test_log_format_completeness);
test_enum_completeness!(LogOutput, test_log_output_completeness);
test_enum_completeness!(NamingStrategy, test_naming_strategy_completeness);
test_enum_completeness!(ColorIntent, test_color_intent_completeness);

#[test]
fn test_aliases_parse() {
    assert_eq!("yml".parse::<LogFormat>().unwrap(), LogFormat::Yaml);
    assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
    assert_eq!(
        "strict".parse::<NamingStrategy>().unwrap(),
        NamingStrategy::Counter
    );
}

#[test]
fn test_invalid_value_reports_parse_error() {
    let err = "sometimes".parse::<NamingStrategy>().unwrap_err();
    match err {
        ConfigError::ParseError { value, reason } => {
            assert_eq!(value, "sometimes");
            assert_eq!(reason, "invalid naming strategy");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_verbosity_mapping() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(9), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(1).as_filter(), "warn");
}

#[test]
fn test_naming_strategy_default_is_literal() {
    assert_eq!(NamingStrategy::default(), NamingStrategy::Literal);
}

#[test]
fn test_color_intent_explicit_choices() {
    assert!(ColorIntent::Always.resolve());
    assert!(!ColorIntent::Never.resolve());
    assert_eq!("no".parse::<ColorIntent>().unwrap(), ColorIntent::Never);
}
