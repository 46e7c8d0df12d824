use super::*;

#[test]
fn parses_scan_command() {
    let cli = Cli::try_parse_from(["vitrine", "scan", "--input", "products.json"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Scan { ref input } if input == &PathBuf::from("products.json")
    ));
}

#[test]
fn scan_requires_input() {
    let result = Cli::try_parse_from(["vitrine", "scan"]);
    assert!(result.is_err(), "expected parse failure without --input");
}

#[test]
fn parses_group_command_with_mode() {
    let cli = Cli::try_parse_from([
        "vitrine",
        "group",
        "--input",
        "products.json",
        "--mode",
        "adaptive",
        "--pretty",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Group {
            mode: Some(GroupingMode::Adaptive),
            pretty: true,
            ..
        }
    ));
}

#[test]
fn group_mode_defaults_to_config() {
    let cli = Cli::try_parse_from(["vitrine", "group", "--input", "products.json"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Group {
            mode: None,
            pretty: false,
            ..
        }
    ));
}

#[test]
fn group_rejects_unknown_mode() {
    let result = Cli::try_parse_from([
        "vitrine",
        "group",
        "--input",
        "products.json",
        "--mode",
        "by-color",
    ]);
    assert!(result.is_err(), "expected parse failure for unknown mode");
}

#[test]
fn parses_browse_filters() {
    let cli = Cli::try_parse_from([
        "vitrine",
        "browse",
        "--input",
        "products.json",
        "--category",
        "herramientas",
        "--price",
        "100-300",
        "--search",
        "disco",
        "--sort",
        "price-high",
        "--page",
        "2",
        "--per-page",
        "12",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Browse {
            category,
            price,
            search,
            sort,
            page,
            per_page,
            ..
        } => {
            assert_eq!(category, Some(Category::Herramientas));
            assert_eq!(price, Some(PriceBand::From100To300));
            assert_eq!(search.as_deref(), Some("disco"));
            assert_eq!(sort, SortOrder::PriceHigh);
            assert_eq!(page, 2);
            assert_eq!(per_page, Some(12));
        }
        other => panic!("expected browse command, got {other:?}"),
    }
}

#[test]
fn browse_defaults() {
    let cli = Cli::try_parse_from(["vitrine", "browse", "--input", "products.json"])
        .expect("expected valid cli args");

    match cli.command {
        Commands::Browse {
            mode,
            category,
            price,
            search,
            sort,
            page,
            per_page,
            ..
        } => {
            assert!(mode.is_none());
            assert!(category.is_none());
            assert!(price.is_none());
            assert!(search.is_none());
            assert_eq!(sort, SortOrder::Name);
            assert_eq!(page, 1);
            assert!(per_page.is_none());
        }
        other => panic!("expected browse command, got {other:?}"),
    }
}

#[test]
fn browse_rejects_unknown_price_band() {
    let result = Cli::try_parse_from([
        "vitrine",
        "browse",
        "--input",
        "products.json",
        "--price",
        "1000+",
    ]);
    assert!(result.is_err(), "expected parse failure for unknown price band");
}

#[test]
fn parses_fetch_command_with_output() {
    let cli = Cli::try_parse_from(["vitrine", "fetch", "--output", "grouped.json"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Fetch {
            mode: None,
            output: Some(ref path),
            pretty: false,
        } if path == &PathBuf::from("grouped.json")
    ));
}

#[test]
fn missing_subcommand_is_an_error() {
    let result = Cli::try_parse_from(["vitrine"]);
    assert!(result.is_err(), "expected parse failure without a subcommand");
}

fn broken_config() -> LoadedConfig {
    Err(ConfigError::InvalidEnvVar {
        var: "VITRINE_GROUPING_MODE".to_string(),
        reason: "unknown grouping mode".to_string(),
    })
}

#[test]
fn explicit_flags_do_not_need_valid_config() {
    let config = broken_config();
    assert_eq!(
        resolve_mode(Some(GroupingMode::Adaptive), &config).expect("flag wins"),
        GroupingMode::Adaptive
    );
    assert_eq!(resolve_per_page(Some(12), &config).expect("flag wins"), 12);
}

#[test]
fn missing_flag_surfaces_config_error() {
    let err = resolve_mode(None, &broken_config()).expect_err("config is required");
    assert!(
        err.to_string().contains("VITRINE_GROUPING_MODE"),
        "unexpected error: {err}"
    );
}
