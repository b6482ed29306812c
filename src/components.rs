//! Pure Yew view components for the timer board.
//!
//! These render from props only; all state lives in the board owned by the
//! app component.

use crate::hooks::DurationField;
use multi_timer::{TimerId, TimerView};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimerCardProps {
    pub timer: TimerView,
    pub on_start: Callback<TimerId>,
    pub on_stop: Callback<TimerId>,
    pub on_reset: Callback<TimerId>,
    pub on_delete: Callback<TimerId>,
}

/// One countdown with its four buttons. Disabled buttons come straight from
/// the timer's controls.
#[function_component(TimerCard)]
pub fn timer_card(props: &TimerCardProps) -> Html {
    let TimerView { id, label, display, controls, .. } = &props.timer;
    let id = *id;

    html! {
        <div class="timer" id={id.to_string()}>
            <div class="timer-title">{ label.clone() }</div>
            <div class="timer-display">{ display.clone() }</div>
            <button class="start-btn"
                disabled={!controls.start}
                onclick={props.on_start.reform(move |_| id)}>
                { "Start" }
            </button>
            <button class="stop-btn"
                disabled={!controls.stop}
                onclick={props.on_stop.reform(move |_| id)}>
                { "Stop" }
            </button>
            <button class="reset-btn"
                disabled={!controls.reset}
                onclick={props.on_reset.reform(move |_| id)}>
                { "Reset" }
            </button>
            <button class="delete-btn"
                disabled={!controls.delete}
                onclick={props.on_delete.reform(move |_| id)}>
                { "Delete Timer" }
            </button>
        </div>
    }
}

/// Number input for minutes or seconds with its inline error.
pub fn render_duration_input(id: &'static str, caption: &'static str, max: Option<u32>, field: &DurationField) -> Html {
    html! {
        <div class="form-group">
            <label for={id}>{ caption }</label>
            <input
                type="number"
                id={id}
                min="0"
                max={max.map(|m| m.to_string())}
                placeholder="0"
                value={field.text.clone()}
                class={if field.error.is_some() { "invalid" } else { "" }}
                oninput={field.oninput.clone()}
                onchange={field.onchange.clone()}
            />
            if let Some(ref err) = field.error {
                <div class="input-error">{ err }</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToolbarProps {
    pub on_pomodoro: Callback<MouseEvent>,
    pub on_toggle_theme: Callback<MouseEvent>,
    pub on_stop_music: Callback<MouseEvent>,
    pub dark: bool,
}

#[function_component(Toolbar)]
pub fn toolbar(props: &ToolbarProps) -> Html {
    html! {
        <div class="toolbar">
            <button id="pomodoro-timer" onclick={props.on_pomodoro.clone()}>
                { "Start Pomodoro" }
            </button>
            <button id="theme-toggle" onclick={props.on_toggle_theme.clone()}>
                { if props.dark { "Light Mode" } else { "Dark Mode" } }
            </button>
            <button id="stop-music" onclick={props.on_stop_music.clone()}>
                { "Stop Music" }
            </button>
        </div>
    }
}
