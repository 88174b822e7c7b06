// Default value functions for serde deserialization

use crate::types::{CodeAction, TriggerBinding};

pub fn enabled() -> bool {
    true
}

/// The built-in phrases, one per action.
pub fn trigger_phrases() -> Vec<TriggerBinding> {
    vec![
        TriggerBinding::new("debugmode", CodeAction::DebugMode),
        TriggerBinding::new("testmode", CodeAction::TestMode),
        TriggerBinding::new("loadlang", CodeAction::LoadLang),
        TriggerBinding::new("debugfiles", CodeAction::DebugFiles),
        TriggerBinding::new("crashplease", CodeAction::CrashPlease),
        TriggerBinding::new("workmode", CodeAction::WorkMode),
        TriggerBinding::new("moderate", CodeAction::Moderate),
        TriggerBinding::new("getdifference", CodeAction::GetDifference),
        TriggerBinding::new("loadcolors", CodeAction::LoadColors),
        TriggerBinding::new("edittheme", CodeAction::EditTheme),
        TriggerBinding::new("videoplayer", CodeAction::VideoPlayer),
    ]
}
