//! Plural category tables shared by the phrasal runtime.
//!
//! Every locale belongs to one plural *family*. A family is a pure function
//! from a numeric count to one of the six CLDR category names. Locales are
//! matched exactly first, then by their language prefix (the part before the
//! first `-`), and anything unknown is treated as [`PluralFamily::Germanic`].
//!
//! Rules work on `f64` counts with the remainder operator; fractional counts
//! land in whichever branch the comparisons leave them in.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// One of the six CLDR plural categories.
///
/// Ordering follows the category index (`zero` first, `other` last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// All categories in index order.
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    /// Category name as it appears in resource catalogs.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    /// Position of this category in [`PluralCategory::ALL`].
    pub fn index(self) -> usize {
        match self {
            PluralCategory::Zero => 0,
            PluralCategory::One => 1,
            PluralCategory::Two => 2,
            PluralCategory::Few => 3,
            PluralCategory::Many => 4,
            PluralCategory::Other => 5,
        }
    }

    /// Returns true if `name` is one of the six category names.
    pub fn is_category_name(name: &str) -> bool {
        name.parse::<PluralCategory>().is_ok()
    }
}

impl Display for PluralCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a string that is not a plural category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl Display for UnknownCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "unknown plural category '{}'", self.0)
    }
}

impl Error for UnknownCategory {}

impl FromStr for PluralCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" => Ok(PluralCategory::Zero),
            "one" => Ok(PluralCategory::One),
            "two" => Ok(PluralCategory::Two),
            "few" => Ok(PluralCategory::Few),
            "many" => Ok(PluralCategory::Many),
            "other" => Ok(PluralCategory::Other),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// A group of locales sharing identical plural arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralFamily {
    Arabic,
    /// No morphological plural: always `other`.
    Chinese,
    Germanic,
    /// French and Brazilian Portuguese: 0 and 1 are singular.
    French,
    /// Russian, Croatian and Lithuanian share one rule here.
    Russian,
    Czech,
    Polish,
    Icelandic,
    Slovenian,
}

/// Locale (or language prefix) to family assignments.
const LOCALE_FAMILIES: &[(&str, PluralFamily)] = &[
    ("ar", PluralFamily::Arabic),
    ("id", PluralFamily::Chinese),
    ("ja", PluralFamily::Chinese),
    ("ko", PluralFamily::Chinese),
    ("lo", PluralFamily::Chinese),
    ("ms", PluralFamily::Chinese),
    ("th", PluralFamily::Chinese),
    ("zh", PluralFamily::Chinese),
    ("fa", PluralFamily::Germanic),
    ("da", PluralFamily::Germanic),
    ("de", PluralFamily::Germanic),
    ("en", PluralFamily::Germanic),
    ("es", PluralFamily::Germanic),
    ("fi", PluralFamily::Germanic),
    ("el", PluralFamily::Germanic),
    ("he", PluralFamily::Germanic),
    ("hu", PluralFamily::Germanic),
    ("it", PluralFamily::Germanic),
    ("nl", PluralFamily::Germanic),
    ("no", PluralFamily::Germanic),
    ("pt", PluralFamily::Germanic),
    ("sv", PluralFamily::Germanic),
    ("fr", PluralFamily::French),
    ("tl", PluralFamily::French),
    ("tr", PluralFamily::French),
    ("pt-br", PluralFamily::French),
    ("hr", PluralFamily::Russian),
    ("ru", PluralFamily::Russian),
    ("lt", PluralFamily::Russian),
    ("cs", PluralFamily::Czech),
    ("sk", PluralFamily::Czech),
    ("pl", PluralFamily::Polish),
    ("is", PluralFamily::Icelandic),
    ("sl", PluralFamily::Slovenian),
];

impl PluralFamily {
    /// Resolve the family for a locale identifier.
    ///
    /// Resolution order:
    /// 1. Exact locale match (e.g. `"pt-br"`)
    /// 2. Language prefix before the first `-` (e.g. `"en-IN"` -> `"en"`)
    /// 3. [`PluralFamily::Germanic`]
    ///
    /// Matching is case-sensitive.
    pub fn for_locale(locale: &str) -> PluralFamily {
        Self::lookup(locale)
            .or_else(|| locale.split('-').next().and_then(Self::lookup))
            .unwrap_or(PluralFamily::Germanic)
    }

    /// Locales (and language prefixes) explicitly assigned to this family.
    pub fn locales(self) -> impl Iterator<Item = &'static str> {
        LOCALE_FAMILIES
            .iter()
            .filter(move |(_, family)| *family == self)
            .map(|(locale, _)| *locale)
    }

    fn lookup(locale: &str) -> Option<PluralFamily> {
        LOCALE_FAMILIES
            .iter()
            .find(|(code, _)| *code == locale)
            .map(|(_, family)| *family)
    }

    /// Category for `n` under this family's arithmetic.
    pub fn category_for(self, n: f64) -> PluralCategory {
        match self {
            PluralFamily::Arabic => arabic_rule(n),
            PluralFamily::Chinese => PluralCategory::Other,
            PluralFamily::Germanic => germanic_rule(n),
            PluralFamily::French => french_rule(n),
            PluralFamily::Russian => russian_rule(n),
            PluralFamily::Czech => czech_rule(n),
            PluralFamily::Polish => polish_rule(n),
            PluralFamily::Icelandic => icelandic_rule(n),
            PluralFamily::Slovenian => slovenian_rule(n),
        }
    }
}

/// Classify `count` for `locale` using the locale's plural family.
///
/// # Examples
///
/// ```
/// use phrasal_plural::{PluralCategory, classify};
///
/// assert_eq!(classify("ru", 21.0), PluralCategory::One);
/// assert_eq!(classify("ru", 22.0), PluralCategory::Few);
/// assert_eq!(classify("ru", 11.0), PluralCategory::Many);
/// assert_eq!(classify("fr", 0.0), PluralCategory::One);
/// assert_eq!(classify("en-IN", 2.0), PluralCategory::Other);
/// ```
pub fn classify(locale: &str, count: f64) -> PluralCategory {
    PluralFamily::for_locale(locale).category_for(count)
}

/// The minimal zero/one/other classifier.
///
/// `0` selects `zero` only when the caller has a `zero` form, otherwise
/// `other`; exactly `1` selects `one`; everything else is `other`. The
/// locale plays no part.
///
/// ```
/// use phrasal_plural::{PluralCategory, simple_category};
///
/// assert_eq!(simple_category(0.0, true), PluralCategory::Zero);
/// assert_eq!(simple_category(0.0, false), PluralCategory::Other);
/// assert_eq!(simple_category(1.0, false), PluralCategory::One);
/// ```
pub fn simple_category(count: f64, has_zero: bool) -> PluralCategory {
    if count == 0.0 {
        if has_zero {
            PluralCategory::Zero
        } else {
            PluralCategory::Other
        }
    } else if count == 1.0 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

// ── Rule implementations ────────────────────────────────────────────

fn is_one_of(value: f64, candidates: &[f64]) -> bool {
    candidates.contains(&value)
}

fn arabic_rule(n: f64) -> PluralCategory {
    if n < 3.0 {
        // Only exact 0, 1, 2 index a category; anything else below 3 has none.
        return if n == 0.0 {
            PluralCategory::Zero
        } else if n == 1.0 {
            PluralCategory::One
        } else if n == 2.0 {
            PluralCategory::Two
        } else {
            PluralCategory::Other
        };
    }
    let mod100 = n % 100.0;
    if (3.0..=10.0).contains(&mod100) {
        PluralCategory::Few
    } else if mod100 >= 11.0 {
        PluralCategory::Many
    } else {
        PluralCategory::Other
    }
}

fn germanic_rule(n: f64) -> PluralCategory {
    if n == 0.0 {
        PluralCategory::Zero
    } else if n == 1.0 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

fn french_rule(n: f64) -> PluralCategory {
    if n > 1.0 {
        PluralCategory::Other
    } else {
        PluralCategory::One
    }
}

fn russian_rule(n: f64) -> PluralCategory {
    let mod10 = n % 10.0;
    let mod100 = n % 100.0;

    if mod10 == 1.0 && mod100 != 11.0 {
        PluralCategory::One
    } else if is_one_of(mod10, &[2.0, 3.0, 4.0]) && !is_one_of(mod100, &[12.0, 13.0, 14.0]) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

fn czech_rule(n: f64) -> PluralCategory {
    if n == 1.0 {
        PluralCategory::One
    } else if (2.0..=4.0).contains(&n) {
        PluralCategory::Few
    } else {
        PluralCategory::Other
    }
}

fn polish_rule(n: f64) -> PluralCategory {
    let mod10 = n % 10.0;
    let mod100 = n % 100.0;

    if n == 1.0 {
        PluralCategory::One
    } else if (2.0..=4.0).contains(&mod10) && (mod100 < 10.0 || mod100 >= 20.0) {
        PluralCategory::Few
    } else {
        PluralCategory::Other
    }
}

fn icelandic_rule(n: f64) -> PluralCategory {
    if n % 10.0 != 1.0 || n % 100.0 == 11.0 {
        PluralCategory::Other
    } else {
        PluralCategory::One
    }
}

fn slovenian_rule(n: f64) -> PluralCategory {
    let mod100 = n % 100.0;
    if mod100 == 1.0 {
        PluralCategory::One
    } else if mod100 == 2.0 {
        PluralCategory::Two
    } else if mod100 == 3.0 || mod100 == 4.0 {
        PluralCategory::Few
    } else {
        PluralCategory::Other
    }
}
