use multi_timer::TimerError;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// State and callbacks for one of the duration inputs.
#[derive(Clone)]
pub struct DurationField {
    /// Raw text as typed
    pub text: String,
    /// Inline validation message, set when the field loses focus or changes
    pub error: Option<String>,
    pub oninput: Callback<InputEvent>,
    pub onchange: Callback<Event>,
}

/// Keep the text of a duration input and validate it on commit.
///
/// Validation here is only for the inline hint; the board re-parses the text
/// when the timer is actually added.
#[hook]
pub fn use_duration_field(validate: fn(&str) -> Result<u32, TimerError>) -> DurationField {
    let text = use_state(String::new);
    let error = use_state(|| None::<String>);

    let oninput = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text.set(input.value());
        })
    };

    let onchange = {
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            error.set(validate(&input.value()).err().map(|e| e.to_string()));
        })
    };

    DurationField {
        text: (*text).clone(),
        error: (*error).clone(),
        oninput,
        onchange,
    }
}
