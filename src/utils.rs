use crate::config::MAX_SECONDS;
use crate::TimerError;

/// A parsed "Add Timer" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerRequest {
    pub minutes: u32,
    pub seconds: u32,
    pub label: String,
}

/// Parse one duration field. An empty field counts as zero.
pub fn parse_duration_field(input: &str, field: &'static str) -> Result<u32, TimerError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse::<u32>().map_err(|_| TimerError::InvalidField {
        field,
        input: trimmed.to_string(),
    })
}

/// Validate the minutes field
pub fn validate_minutes(input: &str) -> Result<u32, TimerError> {
    parse_duration_field(input, "Minutes")
}

/// Validate the seconds field
pub fn validate_seconds(input: &str) -> Result<u32, TimerError> {
    let seconds = parse_duration_field(input, "Seconds")?;
    if seconds > MAX_SECONDS {
        return Err(TimerError::SecondsOutOfRange(seconds));
    }
    Ok(seconds)
}

/// Turn the raw form text into a request. Does not reject a zero duration;
/// that is the board's call.
pub fn parse_timer_request(
    minutes: &str,
    seconds: &str,
    label: &str,
) -> Result<TimerRequest, TimerError> {
    Ok(TimerRequest {
        minutes: validate_minutes(minutes)?,
        seconds: validate_seconds(seconds)?,
        label: label.trim().to_string(),
    })
}
