use chrono::NaiveDate;
use storyterm::utils::date::*;

#[test]
fn test_format_long_date() {
    assert_eq!(format_long_date("2024-03-15"), "15 марта 2024 г.");
}

#[test]
fn test_format_long_date_no_leading_zero() {
    assert_eq!(format_long_date("2024-03-05"), "5 марта 2024 г.");
}

#[test]
fn test_format_long_date_contains_parts() {
    let formatted = format_long_date("1999-12-31");
    assert!(!formatted.is_empty());
    assert!(formatted.contains("1999")); // 4-digit year
    assert!(formatted.contains("декабря")); // month spelled out, not a number
    assert!(formatted.contains("31")); // day number
}

#[test]
fn test_format_long_date_all_months() {
    let months = [
        "января",
        "февраля",
        "марта",
        "апреля",
        "мая",
        "июня",
        "июля",
        "августа",
        "сентября",
        "октября",
        "ноября",
        "декабря",
    ];
    for (i, name) in months.iter().enumerate() {
        let input = format!("2024-{:02}-10", i + 1);
        assert_eq!(format_long_date(&input), format!("10 {name} 2024 г."));
    }
}

#[test]
fn test_format_long_date_invalid_input() {
    assert_eq!(format_long_date("not-a-date"), "Invalid Date");
    assert_eq!(format_long_date(""), "Invalid Date");
    assert_eq!(format_long_date("2024-13-40"), "Invalid Date");
}

#[test]
fn test_format_long_datetime_with_time() {
    assert_eq!(
        format_long_datetime("2024-03-15T14:30:00"),
        "15 марта 2024 г., 14:30"
    );
}

#[test]
fn test_format_long_datetime_space_separated() {
    assert_eq!(
        format_long_datetime("2024-03-15 09:05:00"),
        "15 марта 2024 г., 09:05"
    );
}

#[test]
fn test_format_long_datetime_date_only_falls_back() {
    assert_eq!(format_long_datetime("2024-03-15"), "15 марта 2024 г.");
}

#[test]
fn test_format_long_datetime_invalid_input() {
    assert_eq!(format_long_datetime("yesterday"), "Invalid Date");
}

#[test]
fn test_parse_date_flexible_rfc3339() {
    let dt = parse_date_flexible("2024-03-15T14:30:00Z").unwrap();
    assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
}

#[test]
fn test_parse_date_flexible_rejects_garbage() {
    assert!(parse_date_flexible("soon").is_err());
}

#[test]
fn test_format_ymd() {
    let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
    assert_eq!(format_ymd(date), "2023-12-25");
}
