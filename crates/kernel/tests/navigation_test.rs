#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Navigation pipeline tests.

use menudrawer_kernel::navigation::{
    MenuConfiguration, MobileMenuFilter, generate_rules, process_navigation,
};
use menudrawer_kernel::tap::RenderFilter;
use menudrawer_test_utils::{
    TestHost, assert_occurrences, navigation_markup, navigation_markup_with_modal,
    test_navigation,
};
use serde_json::json;

#[test]
fn test_unconfigured_navigation_is_identity() {
    let host = TestHost::new().with_part("mobile-menu", "<p>menu</p>");
    let markup = navigation_markup();

    for nav in [
        test_navigation(),
        test_navigation().with("hasMobileBreakpoint", false).with("mobileBreakpoint", 900),
        test_navigation().slug("").preset_background("primary"),
        test_navigation().with("customMobileIconColor", ""),
    ] {
        let render = process_navigation(markup.clone(), nav.attributes(), &host.ctx());
        assert_eq!(render.markup, markup);
    }
    assert_eq!(host.ids.issued(), 0);
}

#[test]
fn test_preset_wins_over_custom() {
    let nav = test_navigation()
        .preset_background("primary")
        .custom_background("#123456");
    let config = MenuConfiguration::from_attributes(nav.attributes());
    assert_eq!(config.background_color, "var(--wp--preset--color--primary)");
}

#[test]
fn test_breakpoint_presence() {
    let cases = [
        (json!({ "hasMobileBreakpoint": true, "mobileBreakpoint": 600 }), true),
        (json!({ "hasMobileBreakpoint": true }), true),
        (json!({ "hasMobileBreakpoint": true, "mobileBreakpoint": 0 }), false),
        (json!({ "hasMobileBreakpoint": false, "mobileBreakpoint": 600 }), false),
        (json!({ "mobileBreakpoint": 600 }), false),
    ];

    for (attrs, expected) in cases {
        let config = MenuConfiguration::from_attributes(attrs.as_object().unwrap());
        let rules = generate_rules(&config, "nav-1", false);
        let has_media = rules.iter().any(|r| r.starts_with("@media"));
        assert_eq!(has_media, expected, "attrs: {attrs}");
    }
}

#[test]
fn test_breakpoint_600_caps_at_599() {
    let host = TestHost::new();
    let nav = test_navigation().breakpoint(600);
    let render = process_navigation(navigation_markup(), nav.attributes(), &host.ctx());
    assert!(render.markup.starts_with("<style>@media (max-width: 599px) {"));
}

#[test]
fn test_background_rule_requires_slug() {
    let host = TestHost::new().with_part("mobile-menu", "<p>menu</p>");

    let without_slug = test_navigation()
        .preset_background("primary")
        .custom_icon_color("#fff");
    let render = process_navigation(navigation_markup(), without_slug.attributes(), &host.ctx());
    assert!(!render.markup.contains("is-menu-open { background-color"));
    assert!(render.markup.contains("fill: #fff"));

    let with_slug = test_navigation().slug("mobile-menu").preset_background("primary");
    let render = process_navigation(navigation_markup(), with_slug.attributes(), &host.ctx());
    assert!(render.markup.contains("is-menu-open { background-color"));
}

#[test]
fn test_mobile_menu_with_preset_background() {
    let host = TestHost::new().with_part("mobile-menu", "<ul><li>Shop</li></ul>");
    let nav = test_navigation().slug("mobile-menu").preset_background("primary");

    let render = process_navigation(navigation_markup(), nav.attributes(), &host.ctx());
    let id = render.element_id.clone().unwrap();

    let expected_rule = format!(
        "#{id} .wp-block-navigation__responsive-container.is-menu-open {{ background-color: var(--wp--preset--color--primary) !important; }}"
    );
    assert!(render.markup.starts_with(&format!("<style>{expected_rule}</style>")));
    assert_occurrences(&render.markup, "<style>", 1);
    assert!(render.markup.contains(&format!(r#"id="{id}""#)));
    assert!(render.markup.contains(r#"data-mobile-menu-slug="mobile-menu""#));
    assert!(render.markup.contains(r#"data-responsive-navigation="true""#));
    assert!(render.markup.contains(
        r#"data-mobile-menu-background="var(--wp--preset--color--primary)""#
    ));
    assert!(render.markup.contains(concat!(
        r#"id="modal-1-content">"#,
        r#"<div class="wp-block-navigation__mobile-menu" data-mobile-menu="true">"#,
        "<ul><li>Shop</li></ul></div>",
        r#"<ul class="wp-block-navigation__container">"#
    )));
}

#[test]
fn test_empty_template_part_is_not_injected() {
    let host = TestHost::new().with_part("empty-menu", "");
    let nav = test_navigation().slug("empty-menu");

    let render = process_navigation(navigation_markup(), nav.attributes(), &host.ctx());
    assert!(!render.injected);
    assert!(!render.markup.contains("data-mobile-menu=\""));
    assert!(!render.markup.contains("wp-block-navigation__mobile-menu"));
}

#[test]
fn test_reprocessing_does_not_double_inject() {
    let host = TestHost::new().with_part("mobile-menu", "<p>menu</p>");
    let nav = test_navigation().slug("mobile-menu");

    let once = process_navigation(navigation_markup(), nav.attributes(), &host.ctx());
    let twice = process_navigation(once.markup.clone(), nav.attributes(), &host.ctx());

    assert!(once.injected);
    assert!(!twice.injected);
    assert_occurrences(&twice.markup, r#"data-mobile-menu="true""#, 1);
    assert_occurrences(&twice.markup, "has-mobile-menu", 1);
}

#[test]
fn test_ids_unique_across_navigation_blocks() {
    let host = TestHost::new();
    let nav = test_navigation().custom_icon_color("#000");

    let ids: Vec<String> = (1..=3)
        .map(|i| {
            let markup = navigation_markup_with_modal(&format!("modal-{i}"));
            process_navigation(markup, nav.attributes(), &host.ctx())
                .element_id
                .unwrap()
        })
        .collect();

    assert_eq!(ids, vec!["nav-1", "nav-2", "nav-3"]);
}

#[test]
fn test_each_instance_gets_its_own_style_block() {
    let host = TestHost::new();
    let nav = test_navigation().preset_icon_background("base");

    let first = process_navigation(navigation_markup(), nav.attributes(), &host.ctx());
    let second = process_navigation(navigation_markup(), nav.attributes(), &host.ctx());

    assert!(first.markup.starts_with("<style>#nav-1 "));
    assert!(second.markup.starts_with("<style>#nav-2 "));
}

#[test]
fn test_fragment_without_nav_keeps_earlier_stages() {
    let host = TestHost::new().with_part("mobile-menu", "<p>menu</p>");
    let nav = test_navigation().slug("mobile-menu").breakpoint(782);
    let markup = concat!(
        r#"<div class="wp-block-navigation__responsive-container-content" id="x-content">"#,
        "</div>"
    )
    .to_string();

    let render = process_navigation(markup, nav.attributes(), &host.ctx());
    assert!(render.injected);
    assert_eq!(render.element_id, None);
    assert!(!render.markup.contains("<style>"));
}

#[test]
fn test_filter_only_touches_navigation_blocks() {
    let host = TestHost::new().with_part("mobile-menu", "<p>menu</p>");
    let mut block = test_navigation().slug("mobile-menu").block();
    block.name = "core/group".to_string();

    let out = MobileMenuFilter::default().filter(&block, navigation_markup(), &host.ctx());
    assert_eq!(out, navigation_markup());
}
