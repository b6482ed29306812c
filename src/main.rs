//! Main module for the multi-timer board using Yew.
//! Wires the shared board, the browser services and the view components.

use log::{debug, warn};
use multi_timer::config::{ALARM_SRC, DEFAULT_LABEL, LOG_LEVEL, MAX_SECONDS};
use multi_timer::theme::apply_to_body;
use multi_timer::utils::{validate_minutes, validate_seconds};
use multi_timer::{
    logging, AlarmPlayer, AudioAlarm, BoardEvent, BrowserNotifier, GlooScheduler, Notifier,
    TimerBoard, TimerError, TimerId,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod hooks;

use components::{render_duration_input, TimerCard, Toolbar};
use hooks::use_duration_field;

type Board = TimerBoard<GlooScheduler>;
type SharedBoard = Rc<RefCell<Board>>;

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Build the board with the browser services. Scheduled events reach it
/// through a weak reference and redraw the page once applied.
fn shared_board(redraw: UseForceUpdateHandle) -> SharedBoard {
    let alarm: Rc<dyn AlarmPlayer> = Rc::new(AudioAlarm::new(ALARM_SRC));
    let notifier: Rc<dyn Notifier> = Rc::new(BrowserNotifier);

    Rc::new_cyclic(|weak: &Weak<RefCell<Board>>| {
        let weak = weak.clone();
        let deliver = Callback::from(move |event: BoardEvent| {
            if let Some(board) = weak.upgrade() {
                board.borrow_mut().handle(event);
                redraw.force_update();
            }
        });
        RefCell::new(TimerBoard::new(GlooScheduler::new(deliver), alarm, notifier))
    })
}

/// Callback that runs a board command and then redraws.
fn board_command<IN, F>(board: &SharedBoard, redraw: &UseForceUpdateHandle, command: F) -> Callback<IN>
where
    IN: 'static,
    F: Fn(&mut Board, IN) + 'static,
{
    let board = board.clone();
    let redraw = redraw.clone();
    Callback::from(move |input: IN| {
        command(&mut board.borrow_mut(), input);
        redraw.force_update();
    })
}

/// Per-timer commands only fail for timers that are already gone.
fn log_stale(action: &str, result: Result<impl Sized, TimerError>) {
    if let Err(e) = result {
        warn!("Ignoring {} request: {}", action, e);
    }
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component: the add-timer form, the toolbar and the
/// list of timers.
#[function_component(App)]
fn app() -> Html {
    let redraw = use_force_update();
    let board = {
        let redraw = redraw.clone();
        (*use_state(move || shared_board(redraw))).clone()
    };

    let minutes = use_duration_field(validate_minutes);
    let seconds = use_duration_field(validate_seconds);
    let label = use_state(String::new);

    let theme = board.borrow().theme();
    use_effect_with(theme, |theme| {
        apply_to_body(*theme);
        || ()
    });

    let label_oninput = {
        let label = label.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            label.set(input.value());
        })
    };

    let on_add = {
        let minutes = minutes.text.clone();
        let seconds = seconds.text.clone();
        let label = (*label).clone();
        board_command(&board, &redraw, move |b, _: MouseEvent| {
            // The board has already shown the error to the user
            if let Err(e) = b.submit(&minutes, &seconds, &label) {
                debug!("Add Timer refused: {}", e);
            }
        })
    };

    let on_pomodoro = board_command(&board, &redraw, |b, _: MouseEvent| {
        b.start_pomodoro();
    });
    let on_toggle_theme = board_command(&board, &redraw, |b, _: MouseEvent| {
        b.toggle_theme();
    });
    let on_stop_music = board_command(&board, &redraw, |b, _: MouseEvent| b.stop_music());

    let on_start = board_command(&board, &redraw, |b, id: TimerId| log_stale("start", b.start(id)));
    let on_stop = board_command(&board, &redraw, |b, id: TimerId| log_stale("stop", b.stop(id)));
    let on_reset = board_command(&board, &redraw, |b, id: TimerId| log_stale("reset", b.reset(id)));
    let on_delete = board_command(&board, &redraw, |b, id: TimerId| log_stale("delete", b.delete(id)));

    let views = board.borrow().views();

    html! {
        <div class="container">
            <h1>{ "Multi Timer" }</h1>

            <div class="timer-form">
                { render_duration_input("minutes-input", "Minutes:", None, &minutes) }
                { render_duration_input("seconds-input", "Seconds:", Some(MAX_SECONDS), &seconds) }
                <div class="form-group">
                    <label for="timer-type-input">{ "Label:" }</label>
                    <input
                        type="text"
                        id="timer-type-input"
                        placeholder={DEFAULT_LABEL}
                        value={(*label).clone()}
                        oninput={label_oninput}
                    />
                </div>
                <button id="add-timer" onclick={on_add}>{ "Add Timer" }</button>
            </div>

            <Toolbar
                {on_pomodoro}
                {on_toggle_theme}
                {on_stop_music}
                dark={theme.is_dark()}
            />

            <div id="timers-list">
                { for views.into_iter().map(|timer| {
                    let key = timer.id.to_string();
                    html! {
                        <TimerCard
                            key={key}
                            timer={timer}
                            on_start={on_start.clone()}
                            on_stop={on_stop.clone()}
                            on_reset={on_reset.clone()}
                            on_delete={on_delete.clone()}
                        />
                    }
                }) }
            </div>
        </div>
    }
}

/// Entry point: installs the panic hook and console logger, then renders.
fn main() {
    console_error_panic_hook::set_once();
    logging::init(LOG_LEVEL);
    yew::Renderer::<App>::new().render();
}
