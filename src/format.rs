use crate::AbsoluteDate;
use crate::consts::DATE_SEPARATOR;
use crate::engine::CalendarEngine;
use crate::types::parse_date_text;
use chrono::{NaiveDateTime, Timelike};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Year,
    ShortYear,
    MonthName,
    PaddedMonth,
    Month,
    PaddedDay,
    Day,
    Separator,
    Literal(char),
}

/// Longest first, so `MMM` wins over `MM` and `M`
const TOKENS: [(&str, Token); 8] = [
    ("yyyy", Token::Year),
    ("yy", Token::ShortYear),
    ("MMM", Token::MonthName),
    ("MM", Token::PaddedMonth),
    ("M", Token::Month),
    ("dd", Token::PaddedDay),
    ("DD", Token::PaddedDay),
    ("d", Token::Day),
];

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = pattern;
    while !rest.is_empty() {
        if let Some((text, token)) = TOKENS.iter().find(|(text, _)| rest.starts_with(text)) {
            tokens.push(*token);
            rest = &rest[text.len()..];
            continue;
        }
        let mut chars = rest.chars();
        let Some(c) = chars.next() else {
            break;
        };
        tokens.push(if c == DATE_SEPARATOR {
            Token::Separator
        } else {
            Token::Literal(c)
        });
        rest = chars.as_str();
    }
    tokens
}

/// Renders canonical calendar text with a display pattern.
///
/// Pattern tokens: `yyyy`, `yy`, `MMM` (month name), `MM`, `M`, `dd`/`DD`,
/// `d`. A `/` in the pattern becomes `separator`; anything else is copied.
/// Text that isn't canonical is returned with only its separators replaced.
pub fn format_display(
    engine: &dyn CalendarEngine,
    calendar_date: &str,
    pattern: &str,
    separator: char,
) -> String {
    let (year, month, day) = match parse_date_text(calendar_date) {
        Ok(parts) => parts,
        Err(err) => {
            log::debug!("not formatting {calendar_date:?}: {err}");
            return calendar_date
                .chars()
                .map(|c| if c == DATE_SEPARATOR { separator } else { c })
                .collect();
        },
    };

    let mut out = String::with_capacity(pattern.len() + 8);
    for token in tokenize(pattern) {
        match token {
            Token::Year => out.push_str(&year.to_string()),
            Token::ShortYear => out.push_str(&format!("{:02}", year.rem_euclid(100))),
            Token::MonthName => out.push_str(engine.month_name(month)),
            Token::PaddedMonth => out.push_str(&format!("{month:02}")),
            Token::Month => out.push_str(&month.to_string()),
            Token::PaddedDay => out.push_str(&format!("{day:02}")),
            Token::Day => out.push_str(&day.to_string()),
            Token::Separator => out.push(separator),
            Token::Literal(c) => out.push(c),
        }
    }
    out
}

/// [`format_display`] for an absolute date; empty when the calendar can't show it
pub fn format_date(
    engine: &dyn CalendarEngine,
    date: AbsoluteDate,
    pattern: &str,
    separator: char,
) -> String {
    let text = engine.to_calendar_date(date);
    if text.is_empty() {
        return text;
    }
    format_display(engine, &text, pattern, separator)
}

/// Canonical calendar text followed by `HH:MM`
pub fn to_calendar_date_time(engine: &dyn CalendarEngine, date_time: NaiveDateTime) -> String {
    let text = engine.to_calendar_date(AbsoluteDate::from(date_time.date()));
    if text.is_empty() {
        return text;
    }
    format!("{text} {:02}:{:02}", date_time.hour(), date_time.minute())
}
