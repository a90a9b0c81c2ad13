//! One-line rendering of button state and feedback for the log.

use async_button_core::FeedbackEvent;
use async_button_engine::ButtonState;

/// Render a state snapshot as a compact status line.
pub fn render_status(state: &ButtonState) -> String {
    let mut parts = vec![if state.is_loading { "loading" } else { "idle" }.to_string()];

    if state.control_disabled {
        parts.push("disabled".to_string());
    }
    if state.show_progress {
        parts.push("progress".to_string());
    }
    if let Some(tint) = state.tint {
        parts.push(format!("tint={:?}", tint).to_lowercase());
    }
    if state.alert_visible {
        if let Some(alert) = &state.alert {
            parts.push(format!("alert={:?}", alert.title));
        }
    }
    parts.push(format!("ops={}", state.operation_count));

    parts.join(" ")
}

/// Render a feedback event for the log.
pub fn render_feedback(event: &FeedbackEvent) -> String {
    match event {
        FeedbackEvent::Haptic(haptic) => format!("haptic {:?}", haptic).to_lowercase(),
        FeedbackEvent::Tint(intent) => {
            let color = intent
                .color
                .map(|c| format!("{:?}", c).to_lowercase())
                .unwrap_or_else(|| "neutral".to_string());
            format!(
                "tint {} over {}ms after {}ms",
                color,
                intent.animation.duration.as_millis(),
                intent.animation.delay.as_millis()
            )
        }
        FeedbackEvent::Alert(presentation) => match &presentation.message {
            Some(message) => format!("alert {:?}: {}", presentation.title, message),
            None => format!("alert {:?}", presentation.title),
        },
    }
}
