//! Locale-aware formatting seam.
//!
//! Number and date formatting belongs to the host platform. A translator
//! only forwards `localise` calls to its [`LocaleFormatter`]; the bundled
//! [`PlainFormatter`] is a locale-independent stand-in for hosts that have
//! nothing better.

use bon::Builder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A value that can be localised.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Localisable {
    Number(f64),
    Date(NaiveDate),
}

impl From<f64> for Localisable {
    fn from(n: f64) -> Self {
        Localisable::Number(n)
    }
}

impl From<i32> for Localisable {
    fn from(n: i32) -> Self {
        Localisable::Number(f64::from(n))
    }
}

impl From<i64> for Localisable {
    fn from(n: i64) -> Self {
        Localisable::Number(n as f64)
    }
}

impl From<NaiveDate> for Localisable {
    fn from(date: NaiveDate) -> Self {
        Localisable::Date(date)
    }
}

/// How a number is presented.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStyle {
    #[default]
    Decimal,
    Percent,
    Currency,
}

/// How a date component is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStyle {
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
    Long,
    Short,
    Narrow,
}

/// Options forwarded to the formatter, shaped like standard locale
/// formatting options (`{"style": "currency", "currency": "EUR"}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    #[builder(default)]
    pub style: NumberStyle,
    /// ISO 4217 currency code for [`NumberStyle::Currency`].
    #[builder(into)]
    pub currency: Option<String>,
    pub minimum_fraction_digits: Option<usize>,
    pub maximum_fraction_digits: Option<usize>,
    pub year: Option<ComponentStyle>,
    pub month: Option<ComponentStyle>,
    pub day: Option<ComponentStyle>,
    pub weekday: Option<ComponentStyle>,
}

impl FormatOptions {
    fn has_date_components(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.day.is_some() || self.weekday.is_some()
    }
}

/// Formats numbers and dates for a locale.
///
/// Any `Fn(&Localisable, &str, &FormatOptions) -> String + Send + Sync`
/// closure is a formatter.
pub trait LocaleFormatter: Send + Sync {
    fn format(&self, value: &Localisable, locale: &str, options: &FormatOptions) -> String;
}

impl<F> LocaleFormatter for F
where
    F: Fn(&Localisable, &str, &FormatOptions) -> String + Send + Sync,
{
    fn format(&self, value: &Localisable, locale: &str, options: &FormatOptions) -> String {
        self(value, locale, options)
    }
}

/// Locale-independent formatting.
///
/// - decimal: at most three fraction digits, trailing zeros trimmed
/// - percent: the value times 100 with a `%` suffix
/// - currency: `CODE amount` with two fraction digits
/// - dates: ISO `YYYY-MM-DD`, or only the selected components
///
/// No digit grouping and no localized names beyond English.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainFormatter;

impl LocaleFormatter for PlainFormatter {
    fn format(&self, value: &Localisable, _locale: &str, options: &FormatOptions) -> String {
        match value {
            Localisable::Number(n) => format_number(*n, options),
            Localisable::Date(date) => format_date(*date, options),
        }
    }
}

fn format_number(n: f64, options: &FormatOptions) -> String {
    let (default_min, default_max) = match options.style {
        NumberStyle::Decimal => (0, 3),
        NumberStyle::Percent => (0, 0),
        NumberStyle::Currency => (2, 2),
    };
    let min = options.minimum_fraction_digits.unwrap_or(default_min);
    let max = options
        .maximum_fraction_digits
        .unwrap_or(default_max)
        .max(min);

    match options.style {
        NumberStyle::Decimal => fixed(n, min, max),
        NumberStyle::Percent => format!("{}%", fixed(n * 100.0, min, max)),
        NumberStyle::Currency => match &options.currency {
            Some(code) => format!("{code} {}", fixed(n, min, max)),
            None => fixed(n, min, max),
        },
    }
}

/// Render with `max` fraction digits, then trim trailing zeros down to `min`.
fn fixed(n: f64, min: usize, max: usize) -> String {
    let mut rendered = format!("{n:.max$}");
    if let Some(dot) = rendered.find('.') {
        let keep = dot + 1 + min;
        while rendered.len() > keep && rendered.ends_with('0') {
            rendered.pop();
        }
        if rendered.ends_with('.') {
            rendered.pop();
        }
    }
    if rendered == "-0" {
        rendered = "0".to_string();
    }
    rendered
}

fn format_date(date: NaiveDate, options: &FormatOptions) -> String {
    if !options.has_date_components() {
        return date.format("%Y-%m-%d").to_string();
    }

    let mut parts = Vec::new();
    if let Some(style) = options.year {
        parts.push(match style {
            ComponentStyle::TwoDigit => date.format("%y").to_string(),
            _ => date.format("%Y").to_string(),
        });
    }
    if let Some(style) = options.month {
        parts.push(match style {
            ComponentStyle::Numeric => date.format("%-m").to_string(),
            ComponentStyle::TwoDigit => date.format("%m").to_string(),
            ComponentStyle::Long => date.format("%B").to_string(),
            ComponentStyle::Short => date.format("%b").to_string(),
            ComponentStyle::Narrow => narrow(&date.format("%B").to_string()),
        });
    }
    if let Some(style) = options.day {
        parts.push(match style {
            ComponentStyle::TwoDigit => date.format("%d").to_string(),
            _ => date.format("%-d").to_string(),
        });
    }

    let numeric_month = matches!(
        options.month,
        None | Some(ComponentStyle::Numeric | ComponentStyle::TwoDigit)
    );
    let body = parts.join(if numeric_month { "-" } else { " " });

    match options.weekday {
        None => body,
        Some(style) => {
            let weekday = match style {
                ComponentStyle::Short => date.format("%a").to_string(),
                ComponentStyle::Narrow => narrow(&date.format("%A").to_string()),
                _ => date.format("%A").to_string(),
            };
            if body.is_empty() {
                weekday
            } else {
                format!("{weekday}, {body}")
            }
        }
    }
}

fn narrow(name: &str) -> String {
    name.chars().take(1).collect()
}
