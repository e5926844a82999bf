use callsight::infrastructure::observability::TracingConfig;

fn base() -> TracingConfig {
    TracingConfig {
        environment: "test".to_string(),
        json_format: false,
        default_directive: "info,callsight=debug,tower_http=debug".to_string(),
    }
}

#[test]
fn given_level_when_applying_then_directive_uses_it_as_baseline() {
    let config = base().with_level("warn");

    assert_eq!(
        config.default_directive,
        "warn,callsight=debug,tower_http=debug"
    );
}

#[test]
fn given_blank_level_when_applying_then_directive_is_unchanged() {
    let config = base().with_level("  ");

    assert_eq!(config.default_directive, base().default_directive);
}
