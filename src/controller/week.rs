use crate::controller::espn::EspnClient;
use crate::controller::sleeper::SleeperClient;
use crate::error::{AppError, AppResult};
use chrono::{FixedOffset, Utc};
use regex::Regex;

/// Normalize an optional `date` query value to the provider's `YYYYMMDD`
/// day string. Dashes are stripped first, so `2025-10-05` and `20251005`
/// are the same day. Anything else means "today" in the league time zone.
#[must_use]
pub fn day_string(date_param: Option<&str>, tz: FixedOffset) -> String {
    use std::sync::OnceLock;
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| {
        Regex::new(r"^\d{8}$").expect("Invalid regex pattern - this is a programming error")
    });

    let cleaned = date_param.unwrap_or_default().replace('-', "");
    let cleaned = cleaned.trim();
    if re.is_match(cleaned) {
        cleaned.to_string()
    } else {
        Utc::now().with_timezone(&tz).format("%Y%m%d").to_string()
    }
}

/// Resolve the canonical NFL week for a week-scoped request.
///
/// Priority: a positive explicit `week`, then the schedule provider's week
/// for the requested `date`, then the league-state week. A non-positive or
/// unparseable explicit week is ignored rather than rejected, so the
/// request still resolves against the calendar.
///
/// # Errors
///
/// Will return `Err` if no source yields a positive week, or if a fallback
/// fetch itself fails.
pub async fn resolve_week(
    sleeper: &SleeperClient,
    espn: &EspnClient,
    week_param: Option<&str>,
    date_param: Option<&str>,
    tz: FixedOffset,
) -> AppResult<(u32, &'static str)> {
    let explicit = week_param
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|week| *week > 0);
    if let Some(week) = explicit {
        return Ok((week, "query.week"));
    }

    if date_param.is_some() {
        let day = day_string(date_param, tz);
        let board = espn.scoreboard(&day).await?;
        let derived = board.week.and_then(|w| w.number).filter(|week| *week > 0);
        if let Some(week) = derived {
            return Ok((week, "espn.fromDate"));
        }
    }

    match sleeper.current_week().await? {
        Some(week) if week > 0 => Ok((week, "sleeper.state")),
        _ => Err(AppError::WeekUnresolved),
    }
}

/// Same resolution chain as [`resolve_week`], reported in transaction
/// terms. Sleeper calls a transaction week a "round".
///
/// # Errors
///
/// Will return `Err` if no source yields a positive round, or if a
/// fallback fetch itself fails.
pub async fn resolve_round(
    sleeper: &SleeperClient,
    espn: &EspnClient,
    round_param: Option<&str>,
    date_param: Option<&str>,
    tz: FixedOffset,
) -> AppResult<(u32, &'static str)> {
    match resolve_week(sleeper, espn, round_param, date_param, tz).await {
        Ok(resolved) => Ok(resolved),
        Err(AppError::WeekUnresolved) => Err(AppError::RoundUnresolved),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eastern() -> FixedOffset {
        FixedOffset::west_opt(5 * 3600).unwrap()
    }

    #[test]
    fn day_string_accepts_both_date_spellings() {
        assert_eq!(day_string(Some("2025-10-05"), eastern()), "20251005");
        assert_eq!(day_string(Some("20251005"), eastern()), "20251005");
    }

    #[test]
    fn day_string_falls_back_to_today_for_garbage() {
        let today = Utc::now().with_timezone(&eastern()).format("%Y%m%d").to_string();
        assert_eq!(day_string(Some("not-a-date"), eastern()), today);
        assert_eq!(day_string(Some("2025-13"), eastern()), today);
        assert_eq!(day_string(None, eastern()), today);
    }
}
