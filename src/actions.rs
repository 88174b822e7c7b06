//! Built-in secret code actions.
//!
//! Each action is a niladic closure over the panel's shared state. Actions
//! that change a setting only queue a confirmation; the flag flips when the
//! UI calls [`SettingsPanel::confirm`](crate::panel::SettingsPanel::confirm).

use crate::panel::{PanelContext, PanelEvent, Toggle};
use secret_codes_config::CodeAction;
use secret_codes_matcher::Action;

const PALETTE_DIALOG_TITLE: &str = "Open palette file";
const PALETTE_DIALOG_FILTER: &str = "Palette (*.tdesktop-palette)";

/// Build the closure that runs `action` against `context`.
pub(crate) fn build_action(action: CodeAction, context: &PanelContext) -> Action {
    let ctx = context.clone();
    match action {
        CodeAction::DebugMode => Box::new(move || {
            let message = if ctx.state.lock().debug_mode {
                "Do you want to disable DEBUG logs?"
            } else {
                "Do you want to enable DEBUG logs?\n\nAll network events will be logged."
            };
            confirm(&ctx, message, Toggle::DebugMode);
        }),
        CodeAction::TestMode => Box::new(move || {
            let message = if ctx.state.lock().test_mode {
                "Do you want to disable TEST mode?"
            } else {
                "Do you want to enable TEST mode?\n\nYou will be switched to test cloud."
            };
            confirm(&ctx, message, Toggle::TestMode);
        }),
        CodeAction::LoadLang => Box::new(move || ctx.push(PanelEvent::ChooseCustomLanguage)),
        CodeAction::DebugFiles => Box::new(move || {
            let enabled = {
                let mut state = ctx.state.lock();
                if !state.debug_mode {
                    log::debug!("debugfiles ignored outside debug mode");
                    return;
                }
                state.file_loader_logging = !state.file_loader_logging;
                state.file_loader_logging
            };
            let message = if enabled {
                "Enabled file download logging"
            } else {
                "Disabled file download logging"
            };
            ctx.push(PanelEvent::Inform(message.to_string()));
        }),
        CodeAction::CrashPlease => Box::new(crash),
        CodeAction::WorkMode => Box::new(move || {
            let message = if ctx.state.lock().work_mode {
                "Disable work mode?"
            } else {
                "Enable work mode?"
            };
            confirm(&ctx, message, Toggle::WorkMode);
        }),
        CodeAction::Moderate => Box::new(move || {
            let message = if ctx.state.lock().moderate_mode {
                "Disable moderate mode?"
            } else {
                "Enable moderate mode?"
            };
            confirm(&ctx, message, Toggle::ModerateMode);
        }),
        CodeAction::GetDifference => Box::new(move || ctx.push(PanelEvent::RequestDifference)),
        CodeAction::LoadColors => Box::new(move || {
            ctx.push(PanelEvent::OpenPaletteFile {
                title: PALETTE_DIALOG_TITLE.to_string(),
                filter: PALETTE_DIALOG_FILTER.to_string(),
            })
        }),
        CodeAction::EditTheme => Box::new(move || ctx.push(PanelEvent::StartThemeEditor)),
        CodeAction::VideoPlayer => Box::new(move || {
            let message = if ctx.state.lock().external_video_player {
                "Use internal video player?"
            } else {
                "Use external video player?"
            };
            confirm(&ctx, message, Toggle::ExternalVideoPlayer);
        }),
    }
}

fn crash() {
    log::error!("Crash requested from settings");
    panic!("Crashed in Settings!");
}

fn confirm(ctx: &PanelContext, message: &str, toggle: Toggle) {
    ctx.push(PanelEvent::Confirm {
        message: message.to_string(),
        toggle,
    });
}
