use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn hex(value: u32) -> Self {
        Color {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(pub u32);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactRecord {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub last_message: String,
    pub last_message_time: String,
    pub is_online: bool,
    pub avatar_url: String,
}

impl ContactRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }

    /// Case-insensitive match of `query` against the full name.
    pub fn matches(&self, query: &str) -> bool {
        self.full_name()
            .to_lowercase()
            .contains(&query.trim().to_lowercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }
}

/// Display record handed from the project list to the project detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub id: u32,
    pub name: String,
    pub status: ProjectStatus,
    pub progress: u8,
    pub tech: Vec<String>,
    pub start_date: String,
    pub deadline: String,
    pub last_active: String,
    pub team: u32,
    pub commits: u32,
    pub hours: u32,
    pub completed_tasks: u32,
    pub total_tasks: u32,
    pub accent: Color,
}

impl ProjectRecord {
    pub fn task_completion(&self) -> f32 {
        percent_of_total(self.completed_tasks as f32, self.total_tasks as f32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimePeriod {
    Day,
    Week,
    #[default]
    Month,
    Year,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 4] = [
        TimePeriod::Day,
        TimePeriod::Week,
        TimePeriod::Month,
        TimePeriod::Year,
    ];
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimePeriod::Day => "24 Hours",
            TimePeriod::Week => "This Week",
            TimePeriod::Month => "This Month",
            TimePeriod::Year => "This Year",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Share of `part` in `total`, in percent. Zero when `total` is zero.
pub fn percent_of_total(part: f32, total: f32) -> f32 {
    if total == 0.0 {
        return 0.0;
    }
    part / total * 100.0
}

/// Parses abbreviated line counts such as `"12.5K"`. Unparseable input counts as zero.
pub fn parse_line_count(s: &str) -> f64 {
    let s = s.trim();
    let (digits, scale) = match s.strip_suffix(['K', 'k']) {
        Some(digits) => (digits, 1000.0),
        None => (s, 1.0),
    };
    digits.trim().parse::<f64>().map(|v| v * scale).unwrap_or(0.0)
}

/// Formats a line count the way the dashboard cards show them (`12.5K`).
pub fn format_line_count(lines: f64) -> String {
    if lines >= 1000.0 {
        let thousands = lines / 1000.0;
        if thousands.fract() == 0.0 {
            format!("{}K", thousands as u64)
        } else {
            format!("{:.1}K", thousands)
        }
    } else {
        format!("{}", lines as u64)
    }
}
