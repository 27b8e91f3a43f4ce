use crate::models::{Color, Trend};

pub struct KeyMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub unit: &'static str,
    pub change: &'static str,
    pub trend: Trend,
    pub accent: Color,
}

pub static KEY_METRICS: [KeyMetric; 4] = [
    KeyMetric {
        label: "Words Per Minute",
        value: "87",
        unit: "WPM",
        change: "+12%",
        trend: Trend::Up,
        accent: Color::hex(0x5B6FD8),
    },
    KeyMetric {
        label: "Mistakes Made",
        value: "23",
        unit: "errors",
        change: "-18%",
        trend: Trend::Down,
        accent: Color::hex(0xFF6B9D),
    },
    KeyMetric {
        label: "Code Accuracy",
        value: "94.2",
        unit: "%",
        change: "+5%",
        trend: Trend::Up,
        accent: Color::hex(0x4ECDC4),
    },
    KeyMetric {
        label: "Avg Session",
        value: "2.4",
        unit: "hours",
        change: "+8%",
        trend: Trend::Up,
        accent: Color::hex(0xFFD93D),
    },
];

pub struct WpmDay {
    pub day: &'static str,
    pub wpm: u32,
    pub target: u32,
}

pub static WEEKLY_WPM: [WpmDay; 7] = [
    WpmDay { day: "Mon", wpm: 82, target: 75 },
    WpmDay { day: "Tue", wpm: 85, target: 75 },
    WpmDay { day: "Wed", wpm: 79, target: 75 },
    WpmDay { day: "Thu", wpm: 88, target: 75 },
    WpmDay { day: "Fri", wpm: 87, target: 75 },
    WpmDay { day: "Sat", wpm: 75, target: 75 },
    WpmDay { day: "Sun", wpm: 70, target: 75 },
];

pub struct MistakeDay {
    pub day: &'static str,
    pub errors: u32,
    pub corrected: u32,
}

pub static DAILY_MISTAKES: [MistakeDay; 7] = [
    MistakeDay { day: "Mon", errors: 28, corrected: 25 },
    MistakeDay { day: "Tue", errors: 25, corrected: 23 },
    MistakeDay { day: "Wed", errors: 22, corrected: 20 },
    MistakeDay { day: "Thu", errors: 20, corrected: 19 },
    MistakeDay { day: "Fri", errors: 23, corrected: 22 },
    MistakeDay { day: "Sat", errors: 18, corrected: 17 },
    MistakeDay { day: "Sun", errors: 16, corrected: 15 },
];

pub struct CommonMistake {
    pub issue: &'static str,
    pub frequency: u32,
    pub language: &'static str,
}

pub static COMMON_MISTAKES: [CommonMistake; 5] = [
    CommonMistake { issue: "Missing semicolons", frequency: 42, language: "JavaScript" },
    CommonMistake { issue: "Undefined variables", frequency: 35, language: "Python" },
    CommonMistake { issue: "Type mismatches", frequency: 28, language: "TypeScript" },
    CommonMistake { issue: "Bracket mismatch", frequency: 22, language: "All" },
    CommonMistake { issue: "Import errors", frequency: 18, language: "React" },
];

pub static SKILL_ACCURACY: [(&str, u32); 6] = [
    ("JavaScript", 95),
    ("TypeScript", 93),
    ("Python", 91),
    ("React", 94),
    ("Node.js", 92),
    ("HTML/CSS", 96),
];

pub struct SessionProductivity {
    pub time: &'static str,
    pub productivity: u32,
    pub sessions: u32,
}

pub static PRODUCTIVITY_BY_SESSION: [SessionProductivity; 4] = [
    SessionProductivity { time: "Morning (6-12)", productivity: 78, sessions: 42 },
    SessionProductivity { time: "Afternoon (12-18)", productivity: 92, sessions: 58 },
    SessionProductivity { time: "Evening (18-24)", productivity: 65, sessions: 25 },
    SessionProductivity { time: "Night (0-6)", productivity: 45, sessions: 8 },
];

pub struct RecentSession {
    pub date: &'static str,
    pub duration: &'static str,
    pub productivity: u32,
    pub tasks: u32,
}

pub static RECENT_SESSIONS: [RecentSession; 5] = [
    RecentSession { date: "Dec 31, 2:30 PM", duration: "2h 45m", productivity: 94, tasks: 8 },
    RecentSession { date: "Dec 31, 9:15 AM", duration: "1h 30m", productivity: 88, tasks: 5 },
    RecentSession { date: "Dec 30, 3:00 PM", duration: "3h 15m", productivity: 96, tasks: 12 },
    RecentSession { date: "Dec 30, 10:00 AM", duration: "2h 00m", productivity: 85, tasks: 6 },
    RecentSession { date: "Dec 29, 4:00 PM", duration: "2h 20m", productivity: 91, tasks: 9 },
];

pub fn average_wpm() -> f32 {
    let total: u32 = WEEKLY_WPM.iter().map(|d| d.wpm).sum();
    total as f32 / WEEKLY_WPM.len() as f32
}

/// Days on which the WPM target was met or beaten.
pub fn days_on_target() -> usize {
    WEEKLY_WPM.iter().filter(|d| d.wpm >= d.target).count()
}

pub fn total_mistakes() -> (u32, u32) {
    DAILY_MISTAKES
        .iter()
        .fold((0, 0), |(errors, corrected), d| {
            (errors + d.errors, corrected + d.corrected)
        })
}

pub fn best_session_slot() -> &'static SessionProductivity {
    PRODUCTIVITY_BY_SESSION
        .iter()
        .max_by_key(|s| s.productivity)
        .unwrap_or(&PRODUCTIVITY_BY_SESSION[0])
}
