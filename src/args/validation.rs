use std::path::PathBuf;

/// # Errors
///
/// Will return `Err` if the path exists but is not a directory. A missing
/// directory is fine; it gets created on first write.
pub fn check_usable_dir(dir: &str) -> Result<String, String> {
    let path = PathBuf::from(dir);
    if path.exists() && !path.is_dir() {
        return Err(format!("'{dir}' exists and is not a directory."));
    }
    Ok(dir.to_string())
}

/// # Errors
///
/// Will return `Err` if the value is not a whole-hour UTC offset.
pub fn check_offset_hours(value: &str) -> Result<i32, String> {
    let hours: i32 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a whole number of hours."))?;
    if !(-23..=23).contains(&hours) {
        return Err("Time zone offset must be between -23 and 23 hours.".to_string());
    }
    Ok(hours)
}
