use chrono::SecondsFormat;

/// First candidate that is non-empty after trimming. Both the team-name and
/// player-name fallback chains run through here.
#[must_use]
pub fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
}

/// Fantasy points are shown to one decimal place.
#[must_use]
pub fn round_to_tenth(points: f64) -> f64 {
    (points * 10.0).round() / 10.0
}

#[must_use]
pub fn avatar_full_url(avatar_id: Option<&str>) -> Option<String> {
    avatar_id
        .filter(|id| !id.is_empty())
        .map(|id| format!("https://sleepercdn.com/avatars/{id}"))
}

#[must_use]
pub fn avatar_thumb_url(avatar_id: Option<&str>) -> Option<String> {
    avatar_id
        .filter(|id| !id.is_empty())
        .map(|id| format!("https://sleepercdn.com/avatars/thumbs/{id}"))
}

/// Millisecond epoch to the ISO-8601 form the mobile client renders.
/// Out-of-range values return `None`.
#[must_use]
pub fn ms_epoch_to_iso(ms: i64) -> Option<String> {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}
