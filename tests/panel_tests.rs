//! Integration tests for the settings panel: typed phrases → actions → events.

mod common;

use common::{default_panel, panel_with, type_text};
use secret_codes::config::{CodeAction, Config, TriggerBinding};
use secret_codes::{HostState, PanelEvent, SettingsPanel, Toggle};

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn default_panel_registers_every_builtin_phrase() {
    let panel = default_panel();
    assert!(panel.is_enabled());
    let phrases: Vec<_> = panel.bindings().map(|(p, _)| p.to_string()).collect();
    for expected in [
        "debugmode",
        "testmode",
        "loadlang",
        "debugfiles",
        "crashplease",
        "workmode",
        "moderate",
        "getdifference",
        "loadcolors",
        "edittheme",
        "videoplayer",
    ] {
        assert!(phrases.iter().any(|p| p == expected), "missing {expected}");
    }
}

#[test]
fn duplicate_phrases_fail_construction() {
    let config = Config {
        trigger_phrases: vec![
            TriggerBinding::new("WorkMode", CodeAction::WorkMode),
            TriggerBinding::new("workmode", CodeAction::Moderate),
        ],
        ..Config::default()
    };
    let err = SettingsPanel::new(&config).unwrap_err();
    assert!(format!("{err:#}").contains("duplicate trigger phrase 'workmode'"));
}

#[test]
fn empty_binding_list_fails_construction() {
    let config = Config {
        trigger_phrases: Vec::new(),
        ..Config::default()
    };
    assert!(SettingsPanel::new(&config).is_err());
}

#[test]
fn disabled_config_skips_validation() {
    let config = Config {
        enabled: false,
        trigger_phrases: Vec::new(),
        ..Config::default()
    };
    let mut panel = SettingsPanel::new(&config).unwrap();
    assert!(type_text(&mut panel, "workmode").is_empty());
}

// ---------------------------------------------------------------------------
// Typing phrases
// ---------------------------------------------------------------------------

#[test]
fn typing_workmode_asks_for_confirmation() {
    let mut panel = default_panel();
    assert_eq!(type_text(&mut panel, "workmode"), ["workmode"]);
    assert_eq!(
        panel.drain_events(),
        [PanelEvent::Confirm {
            message: "Enable work mode?".to_string(),
            toggle: Toggle::WorkMode,
        }]
    );
    // Nothing changes until the user confirms.
    assert!(!panel.state().work_mode);
    panel.confirm(Toggle::WorkMode);
    assert!(panel.state().work_mode);

    type_text(&mut panel, "WORKMODE");
    assert!(matches!(
        &panel.drain_events()[..],
        [PanelEvent::Confirm { message, .. }] if message == "Disable work mode?"
    ));
}

#[test]
fn phrase_typed_amid_other_keys_fires() {
    let mut panel = default_panel();
    assert_eq!(type_text(&mut panel, "hello edittheme world"), ["edittheme"]);
    assert_eq!(panel.drain_events(), [PanelEvent::StartThemeEditor]);
}

#[test]
fn non_printable_keys_deliver_empty_text() {
    let mut panel = default_panel();
    type_text(&mut panel, "loadl");
    assert_eq!(panel.key_press(""), None);
    assert_eq!(panel.key_press(""), None);
    assert_eq!(type_text(&mut panel, "ang"), ["loadlang"]);
    assert_eq!(panel.drain_events(), [PanelEvent::ChooseCustomLanguage]);
}

#[test]
fn debugfiles_only_works_in_debug_mode() {
    let mut panel = default_panel();
    type_text(&mut panel, "debugfiles");
    assert!(panel.drain_events().is_empty());

    let mut panel = SettingsPanel::with_state(
        &Config::default(),
        HostState {
            debug_mode: true,
            ..HostState::default()
        },
    )
    .unwrap();
    type_text(&mut panel, "debugfiles");
    assert_eq!(
        panel.drain_events(),
        [PanelEvent::Inform("Enabled file download logging".to_string())]
    );
    assert!(panel.state().file_loader_logging);
}

#[test]
fn confirming_moderate_mode_marks_settings_dirty() {
    let mut panel = default_panel();
    type_text(&mut panel, "moderate");
    let toggle = match &panel.drain_events()[..] {
        [PanelEvent::Confirm { toggle, .. }] => *toggle,
        other => panic!("unexpected events: {other:?}"),
    };
    assert!(panel.confirm(toggle));
    assert!(panel.state().moderate_mode);
    assert_eq!(panel.drain_events(), [PanelEvent::UserSettingsChanged]);
}

#[test]
fn crashplease_panics_and_panel_recovers() {
    let mut panel = default_panel();
    type_text(&mut panel, "crashpleas");
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        panel.key_press("e");
    }));
    assert!(outcome.is_err());
    // The recognizer was cleared before the action ran.
    assert_eq!(type_text(&mut panel, "getdifference"), ["getdifference"]);
    assert_eq!(panel.drain_events(), [PanelEvent::RequestDifference]);
}

#[test]
fn custom_phrase_shadowing_a_longer_one_never_fires() {
    let mut panel = panel_with(&[
        ("theme", CodeAction::LoadColors),
        ("themeedit", CodeAction::EditTheme),
    ]);
    assert!(type_text(&mut panel, "themex").is_empty());
    assert_eq!(type_text(&mut panel, "themeedit"), ["themeedit"]);
    assert_eq!(panel.drain_events(), [PanelEvent::StartThemeEditor]);
}

#[test]
fn separate_panels_keep_separate_buffers() {
    let mut first = default_panel();
    let mut second = default_panel();
    type_text(&mut first, "videoplay");
    assert!(type_text(&mut second, "er").is_empty());
    assert_eq!(type_text(&mut first, "er"), ["videoplayer"]);
    assert!(second.drain_events().is_empty());
    assert_eq!(first.drain_events().len(), 1);
}

// ---------------------------------------------------------------------------
// Panels built from merged user configs
// ---------------------------------------------------------------------------

fn merged_config(bindings: &[(&str, CodeAction)]) -> Config {
    let mut config = Config {
        trigger_phrases: bindings
            .iter()
            .map(|(phrase, action)| TriggerBinding::new(*phrase, *action))
            .collect(),
        ..Config::default()
    };
    config.merge_default_bindings();
    config
}

#[test]
fn short_user_phrase_still_fires_after_default_merge() {
    let config = merged_config(&[("debug", CodeAction::WorkMode)]);
    let mut panel = SettingsPanel::new(&config).expect("merged config must build");
    assert_eq!(type_text(&mut panel, "debug "), ["debug"]);
    assert!(matches!(
        panel.drain_events().as_slice(),
        [PanelEvent::Confirm {
            toggle: Toggle::WorkMode,
            ..
        }]
    ));
}

#[test]
fn unicode_case_variant_of_default_still_builds() {
    let config = merged_config(&[("wor\u{212A}mode", CodeAction::Moderate)]);
    let mut panel = SettingsPanel::new(&config).expect("merged config must build");
    assert_eq!(type_text(&mut panel, "WORKMODE"), ["workmode"]);
}
