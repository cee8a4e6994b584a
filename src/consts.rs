/// Months in every calendar this crate ships
pub const MONTHS_PER_YEAR: u8 = 12;

/// Days in a week, and columns in a month grid
pub const DAYS_PER_WEEK: u8 = 7;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// February, the only Gregorian month whose length varies
pub const FEBRUARY: u8 = 2;
/// Length of February in a Gregorian leap year
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Gregorian month lengths in a common year, indexed by month number
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

// Gregorian leap rule: every 4th year, except centuries not divisible by 400
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
pub(crate) const CENTURY_CYCLE: i32 = 100;
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Separator of the canonical calendar date text (`Y/MM/DD`)
pub const DATE_SEPARATOR: char = '/';

/// Default display pattern for formatted dates
pub const DEFAULT_DISPLAY_FORMAT: &str = "yyyy/MM/dd";

/// Years listed before the current one in the year chooser
pub const YEAR_CHOICES_BEFORE: i32 = 100;
/// Total years listed in the year chooser
pub const YEAR_CHOICES_COUNT: i32 = 150;

// --- Persian (Solar Hijri) ---

/// Offset between a Persian year and the Gregorian year its Nowruz falls in
pub(crate) const PERSIAN_GREGORIAN_OFFSET: i32 = 621;

/// Years at which the 33-year leap pattern of the Persian calendar is reset.
/// Valid conversions cover `PERSIAN_BREAKS[0]..PERSIAN_BREAKS[last]`.
pub(crate) const PERSIAN_BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Days in Farvardin..Shahrivar
pub(crate) const PERSIAN_LONG_MONTH: u8 = 31;
/// Days in Mehr..Bahman
pub(crate) const PERSIAN_SHORT_MONTH: u8 = 30;
/// Days in Esfand of a common year
pub(crate) const PERSIAN_ESFAND_COMMON: u8 = 29;
/// Days from Nowruz to the first of Mehr
pub(crate) const PERSIAN_FIRST_HALF_DAYS: i64 = 186;

pub const PERSIAN_MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Saturday-first, matching the Persian week
pub const PERSIAN_WEEKDAY_NAMES: [&str; 7] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];

// --- Hijri (tabular Islamic) ---

/// Absolute day (0001-01-01 = 0) of 1 Muharram 1 AH in the tabular calendar
pub(crate) const HIJRI_EPOCH: i64 = 227_013;
/// Days in a 30-year Hijri cycle
pub(crate) const HIJRI_CYCLE_DAYS: i64 = 10_631;
/// Years in a Hijri leap cycle
pub(crate) const HIJRI_CYCLE_YEARS: i32 = 30;
/// Days in a common Hijri year
pub(crate) const HIJRI_COMMON_YEAR_DAYS: i64 = 354;
/// Day shift applied on top of the tabular epoch
pub(crate) const HIJRI_ADJUSTMENT: i64 = -1;
/// Largest supported Hijri year
pub(crate) const HIJRI_MAX_YEAR: i32 = 9666;

/// Days elapsed before each Hijri month (index 12 is a full leap year minus one)
pub(crate) const HIJRI_DAYS_BEFORE_MONTH: [i64; 13] =
    [0, 30, 59, 89, 118, 148, 177, 207, 236, 266, 295, 325, 355];

pub const HIJRI_MONTH_NAMES: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الثاني",
    "جمادى الأولى",
    "جمادى الثانية",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

/// Sunday-first
pub const HIJRI_WEEKDAY_NAMES: [&str; 7] = ["أحد", "اثن", "ثلا", "أرب", "خمي", "جمع", "سبت"];

// --- Gregorian ---

pub const GREGORIAN_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Sunday-first
pub const GREGORIAN_WEEKDAY_NAMES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
