//! App usage and language distribution, per time period and in detail.

use crate::models::{Color, TimePeriod, parse_line_count};

pub struct AppUsage {
    pub name: &'static str,
    pub hours: f32,
    pub percentage: u32,
    pub trend: &'static str,
    pub color: Color,
}

macro_rules! apps {
    ($(($name:expr, $hours:expr, $percentage:expr, $trend:expr, $color:expr)),* $(,)?) => {
        [$(AppUsage {
            name: $name,
            hours: $hours,
            percentage: $percentage,
            trend: $trend,
            color: Color::hex($color),
        }),*]
    };
}

static APPS_DAY: [AppUsage; 5] = apps![
    ("VS Code", 6.5, 85, "+12%", 0x5B6FD8),
    ("Chrome", 4.2, 68, "+8%", 0x4ECDC4),
    ("Terminal", 3.8, 62, "+15%", 0xFF6B9D),
    ("Slack", 2.1, 45, "-3%", 0xFFD93D),
    ("Figma", 1.5, 30, "+5%", 0x9B59B6),
];

static APPS_WEEK: [AppUsage; 5] = apps![
    ("VS Code", 42.0, 82, "+10%", 0x5B6FD8),
    ("Chrome", 28.0, 65, "+6%", 0x4ECDC4),
    ("Terminal", 24.0, 58, "+12%", 0xFF6B9D),
    ("Slack", 14.0, 40, "-2%", 0xFFD93D),
    ("Figma", 10.0, 28, "+4%", 0x9B59B6),
];

static APPS_MONTH: [AppUsage; 5] = apps![
    ("VS Code", 168.0, 80, "+8%", 0x5B6FD8),
    ("Chrome", 115.0, 62, "+5%", 0x4ECDC4),
    ("Terminal", 98.0, 55, "+10%", 0xFF6B9D),
    ("Slack", 56.0, 38, "-1%", 0xFFD93D),
    ("Figma", 42.0, 25, "+3%", 0x9B59B6),
];

static APPS_YEAR: [AppUsage; 5] = apps![
    ("VS Code", 2016.0, 78, "+15%", 0x5B6FD8),
    ("Chrome", 1380.0, 60, "+10%", 0x4ECDC4),
    ("Terminal", 1176.0, 52, "+18%", 0xFF6B9D),
    ("Slack", 672.0, 35, "+2%", 0xFFD93D),
    ("Figma", 504.0, 22, "+7%", 0x9B59B6),
];

pub fn top_apps(period: TimePeriod) -> &'static [AppUsage] {
    match period {
        TimePeriod::Day => &APPS_DAY,
        TimePeriod::Week => &APPS_WEEK,
        TimePeriod::Month => &APPS_MONTH,
        TimePeriod::Year => &APPS_YEAR,
    }
}

pub fn total_app_hours(period: TimePeriod) -> f32 {
    top_apps(period).iter().map(|a| a.hours).sum()
}

pub struct LanguageShare {
    pub label: &'static str,
    pub percentage: u32,
    pub color: Color,
    pub lines: &'static str,
    pub files: u32,
}

macro_rules! languages {
    ($(($label:expr, $percentage:expr, $color:expr, $lines:expr, $files:expr)),* $(,)?) => {
        [$(LanguageShare {
            label: $label,
            percentage: $percentage,
            color: Color::hex($color),
            lines: $lines,
            files: $files,
        }),*]
    };
}

static LANGUAGES_DAY: [LanguageShare; 5] = languages![
    ("JavaScript", 35, 0x5B6FD8, "0.5K", 12),
    ("Python", 28, 0x4ECDC4, "0.4K", 8),
    ("TypeScript", 22, 0xFF6B9D, "0.3K", 6),
    ("Go", 10, 0xFFD93D, "0.15K", 3),
    ("Rust", 5, 0x9B59B6, "0.08K", 2),
];

static LANGUAGES_WEEK: [LanguageShare; 5] = languages![
    ("JavaScript", 35, 0x5B6FD8, "3.5K", 42),
    ("Python", 28, 0x4ECDC4, "2.8K", 35),
    ("TypeScript", 22, 0xFF6B9D, "2.2K", 28),
    ("Go", 10, 0xFFD93D, "1.0K", 12),
    ("Rust", 5, 0x9B59B6, "0.5K", 6),
];

static LANGUAGES_MONTH: [LanguageShare; 5] = languages![
    ("JavaScript", 35, 0x5B6FD8, "12.5K", 142),
    ("Python", 28, 0x4ECDC4, "9.8K", 98),
    ("TypeScript", 22, 0xFF6B9D, "7.2K", 76),
    ("Go", 10, 0xFFD93D, "3.1K", 34),
    ("Rust", 5, 0x9B59B6, "1.8K", 18),
];

static LANGUAGES_YEAR: [LanguageShare; 5] = languages![
    ("JavaScript", 35, 0x5B6FD8, "150K", 1704),
    ("Python", 28, 0x4ECDC4, "117.6K", 1176),
    ("TypeScript", 22, 0xFF6B9D, "86.4K", 912),
    ("Go", 10, 0xFFD93D, "37.2K", 408),
    ("Rust", 5, 0x9B59B6, "21.6K", 216),
];

pub fn top_languages(period: TimePeriod) -> &'static [LanguageShare] {
    match period {
        TimePeriod::Day => &LANGUAGES_DAY,
        TimePeriod::Week => &LANGUAGES_WEEK,
        TimePeriod::Month => &LANGUAGES_MONTH,
        TimePeriod::Year => &LANGUAGES_YEAR,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanguageTotals {
    pub lines: f64,
    pub files: u32,
    pub languages: usize,
}

pub fn language_totals(period: TimePeriod) -> LanguageTotals {
    let languages = top_languages(period);
    LanguageTotals {
        lines: languages.iter().map(|l| parse_line_count(l.lines)).sum(),
        files: languages.iter().map(|l| l.files).sum(),
        languages: languages.len(),
    }
}

pub struct AppDetail {
    pub name: &'static str,
    pub hours: u32,
    pub percentage: u32,
    pub sessions: u32,
    pub avg_session: &'static str,
    pub color: Color,
    pub trend: &'static str,
}

pub static DETAILED_APP_USAGE: [AppDetail; 5] = [
    AppDetail { name: "VS Code", hours: 156, percentage: 42, sessions: 324, avg_session: "28m", color: Color::hex(0x0078D4), trend: "+12%" },
    AppDetail { name: "Chrome", hours: 98, percentage: 26, sessions: 458, avg_session: "12m", color: Color::hex(0x4285F4), trend: "+8%" },
    AppDetail { name: "Figma", hours: 67, percentage: 18, sessions: 145, avg_session: "27m", color: Color::hex(0xF24E1E), trend: "+15%" },
    AppDetail { name: "Slack", hours: 32, percentage: 9, sessions: 234, avg_session: "8m", color: Color::hex(0x4A154B), trend: "-5%" },
    AppDetail { name: "Terminal", hours: 18, percentage: 5, sessions: 89, avg_session: "12m", color: Color::hex(0x48C774), trend: "+20%" },
];

pub static APP_CATEGORIES: [(&str, u32, Color); 4] = [
    ("Development", 174, Color::hex(0x5B6FD8)),
    ("Design", 67, Color::hex(0xF24E1E)),
    ("Browser", 98, Color::hex(0x4285F4)),
    ("Communication", 32, Color::hex(0x4A154B)),
];

pub static WEEKLY_APP_USAGE: [(&str, f32, &str); 7] = [
    ("Mon", 18.2, "VS Code"),
    ("Tue", 18.8, "VS Code"),
    ("Wed", 19.5, "VS Code"),
    ("Thu", 20.6, "VS Code"),
    ("Fri", 18.7, "Figma"),
    ("Sat", 11.1, "Chrome"),
    ("Sun", 9.5, "Chrome"),
];

pub struct LanguageDetail {
    pub name: &'static str,
    pub lines: u32,
    pub files: u32,
    pub percentage: u32,
    pub hours: u32,
    pub color: Color,
    pub trend: &'static str,
}

pub static DETAILED_LANGUAGES: [LanguageDetail; 6] = [
    LanguageDetail { name: "TypeScript", lines: 15420, files: 234, percentage: 35, hours: 145, color: Color::hex(0x3178C6), trend: "+18%" },
    LanguageDetail { name: "JavaScript", lines: 12350, files: 189, percentage: 28, hours: 112, color: Color::hex(0xF7DF1E), trend: "+12%" },
    LanguageDetail { name: "Python", lines: 8920, files: 156, percentage: 20, hours: 89, color: Color::hex(0x3776AB), trend: "+25%" },
    LanguageDetail { name: "HTML/CSS", lines: 4560, files: 98, percentage: 10, hours: 56, color: Color::hex(0xE34F26), trend: "+8%" },
    LanguageDetail { name: "SQL", lines: 2180, files: 45, percentage: 5, hours: 34, color: Color::hex(0xCC2927), trend: "+15%" },
    LanguageDetail { name: "Other", lines: 890, files: 67, percentage: 2, hours: 12, color: Color::hex(0x6B7280), trend: "+5%" },
];

/// Monthly line counts for TypeScript, JavaScript, Python and HTML.
pub static LANGUAGE_GROWTH: [(&str, [u32; 4]); 6] = [
    ("Jul", [12000, 10500, 6500, 3800]),
    ("Aug", [12800, 11200, 7100, 4000]),
    ("Sep", [13500, 11500, 7800, 4200]),
    ("Oct", [14200, 11800, 8200, 4300]),
    ("Nov", [14800, 12100, 8600, 4400]),
    ("Dec", [15420, 12350, 8920, 4560]),
];

pub fn total_detailed_app_hours() -> u32 {
    DETAILED_APP_USAGE.iter().map(|a| a.hours).sum()
}

pub fn total_detailed_lines() -> u32 {
    DETAILED_LANGUAGES.iter().map(|l| l.lines).sum()
}

pub fn total_detailed_files() -> u32 {
    DETAILED_LANGUAGES.iter().map(|l| l.files).sum()
}
