use pretty_assertions::assert_eq;
use starterpack_theme::{
    generate, AppTheme, Color, FontSizeToken, PartialThemeConfig, Radius, RadiusToken,
    ShadowToken, SpacingToken, ThemeConfig,
};

fn with(partial: PartialThemeConfig) -> ThemeConfig {
    ThemeConfig::default().merged(&partial)
}

#[test]
fn equal_configs_generate_equal_themes() {
    let configs = [
        ThemeConfig::default(),
        with(PartialThemeConfig::new().primary_hue(0.0).radius_scale(0.0)),
        with(PartialThemeConfig::new().shadow_intensity(1.0).spacing_unit(3.0)),
    ];

    for config in configs {
        let twin = config.clone();
        assert_eq!(generate(&config), generate(&twin));
    }
}

#[test]
fn generator_does_not_touch_its_input() {
    let config = with(PartialThemeConfig::new().spacing_unit(-5.0));
    let before = config.clone();
    let _ = generate(&config);
    assert_eq!(config, before);
}

#[test]
fn spacing_is_strictly_increasing_for_any_unit() {
    for unit in [-10.0, 0.0, 1.0, 2.0, 4.5, 8.0, 12.0, 64.0, 10_000.0, f32::NAN] {
        let theme = generate(&with(PartialThemeConfig::new().spacing_unit(unit)));
        let steps: Vec<f32> = SpacingToken::ALL
            .iter()
            .map(|token| theme.spacing.get(*token))
            .collect();
        assert!(
            steps.windows(2).all(|pair| pair[0] < pair[1]),
            "unit={unit} steps={steps:?}"
        );
    }
}

#[test]
fn font_sizes_are_strictly_increasing() {
    for base in [0.0, 12.0, 16.0, 20.0, 500.0] {
        let theme = generate(&with(PartialThemeConfig::new().base_font_size(base)));
        let sizes: Vec<f32> = FontSizeToken::ALL
            .iter()
            .map(|token| theme.font_size(*token))
            .collect();
        assert!(sizes.windows(2).all(|pair| pair[0] < pair[1]), "base={base}");
    }
}

#[test]
fn zero_intensity_hides_every_shadow() {
    let theme = generate(&with(PartialThemeConfig::new().shadow_intensity(0.0)));
    for token in ShadowToken::ALL {
        let shadow = theme.shadow(token);
        assert!(!shadow.is_visible(), "{token:?}");
        assert_eq!(shadow.color.a, 0.0);
    }
}

#[test]
fn pill_radius_uses_full_sentinel() {
    let pill = generate(&with(PartialThemeConfig::new().radius_scale(9999.0)));
    assert_eq!(pill.radii.full, Radius::Full);
    assert_ne!(pill.radii.full, Radius::Px(9999.0));

    let rounded = generate(&with(PartialThemeConfig::new().radius_scale(8.0)));
    assert_eq!(rounded.radius(RadiusToken::Small), Radius::Px(4.0));
    assert_eq!(rounded.radius(RadiusToken::Medium), Radius::Px(8.0));
    assert_eq!(rounded.radius(RadiusToken::Full), Radius::Full);

    let square = generate(&with(PartialThemeConfig::new().radius_scale(0.0)));
    assert_eq!(square.radii.medium, Radius::Px(0.0));
}

#[test]
fn degenerate_inputs_still_produce_complete_themes() {
    let config = ThemeConfig {
        primary_hue: f32::NAN,
        spacing_unit: f32::NEG_INFINITY,
        radius_scale: -1.0,
        base_font_size: -16.0,
        shadow_intensity: 42.0,
        background_color: Color::TRANSPARENT,
        text_color: Color::TRANSPARENT,
        shadow_color: Color::TRANSPARENT,
    };
    let theme = generate(&config);

    assert!(theme.spacing.xs > 0.0);
    assert!(theme.font_sizes.xs > 0.0);
    assert_eq!(theme.radii.small, Radius::Px(0.0));
    assert_eq!(theme.to_css_variables().len(), 36);
    assert!(theme.to_json_pretty().is_ok());
}

#[test]
fn hue_zero_and_full_turn_agree() {
    let zero = generate(&with(PartialThemeConfig::new().primary_hue(0.0)));
    let full_turn = generate(&with(PartialThemeConfig::new().primary_hue(360.0)));
    assert_eq!(zero, full_turn);

    let [r, g, b, _] = zero.colors.primary.to_rgba8();
    assert!(r > g && r > b, "hue 0 should be red, got {r},{g},{b}");
}

#[test]
fn theme_json_matches_consumer_shape() {
    let json = serde_json::to_value(AppTheme::default()).unwrap();

    for key in ["colors", "spacing", "radii", "fontSizes", "shadows", "fonts"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["spacing"]["md"], 16.0);
    assert_eq!(json["radii"]["full"], "full");
    assert_eq!(json["colors"]["background"], "#ffffff");
    assert_eq!(json["fontSizes"]["xxxl"], 32.0);
}
