use crate::models::{Color, ProjectRecord, ProjectStatus};

pub const UNTITLED_PROJECT: &str = "Untitled project";

const DEFAULT_DESCRIPTION: &str = "A full-featured e-commerce platform with real-time inventory \
management, secure payment processing, and advanced analytics dashboard for monitoring sales \
and user behavior.";

pub fn detailed_projects() -> Vec<ProjectRecord> {
    let rows = [
        (
            "E-Commerce Platform",
            ProjectStatus::InProgress,
            75,
            &["React", "Node.js", "MongoDB"][..],
            ("Nov 15, 2024", "Jan 15, 2025", "2 hours ago"),
            (5, 234, 156, 45, 60),
            0x5B6FD8,
        ),
        (
            "Analytics Dashboard",
            ProjectStatus::InProgress,
            60,
            &["TypeScript", "React", "Recharts"][..],
            ("Dec 1, 2024", "Jan 30, 2025", "1 day ago"),
            (3, 128, 89, 30, 50),
            0x4ECDC4,
        ),
        (
            "Mobile App Backend",
            ProjectStatus::Completed,
            100,
            &["Python", "FastAPI", "PostgreSQL"][..],
            ("Oct 1, 2024", "Dec 15, 2024", "3 days ago"),
            (4, 312, 203, 75, 75),
            0xFFD93D,
        ),
        (
            "CRM System",
            ProjectStatus::Planning,
            15,
            &["Next.js", "TypeScript", "Prisma"][..],
            ("Dec 20, 2024", "Mar 1, 2025", "5 hours ago"),
            (6, 45, 28, 8, 95),
            0xFF6B9D,
        ),
    ];
    rows.into_iter()
        .zip(1..)
        .map(
            |((name, status, progress, tech, dates, counts, accent), id)| {
                let (start_date, deadline, last_active) = dates;
                let (team, commits, hours, completed_tasks, total_tasks) = counts;
                ProjectRecord {
                    id,
                    name: name.to_string(),
                    status,
                    progress,
                    tech: tech.iter().map(|t| t.to_string()).collect(),
                    start_date: start_date.to_string(),
                    deadline: deadline.to_string(),
                    last_active: last_active.to_string(),
                    team,
                    commits,
                    hours,
                    completed_tasks,
                    total_tasks,
                    accent: Color::hex(accent),
                }
            },
        )
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioSummary {
    pub projects: usize,
    pub hours: u32,
    pub commits: u32,
    pub completed: usize,
}

pub fn portfolio_summary(projects: &[ProjectRecord]) -> PortfolioSummary {
    PortfolioSummary {
        projects: projects.len(),
        hours: projects.iter().map(|p| p.hours).sum(),
        commits: projects.iter().map(|p| p.commits).sum(),
        completed: projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Completed)
            .count(),
    }
}

pub struct RecentProject {
    pub code: &'static str,
    pub name: &'static str,
    pub stack: &'static str,
    pub last_active: &'static str,
}

pub static RECENT_PROJECTS: [RecentProject; 3] = [
    RecentProject { code: "P1", name: "E-Commerce Platform", stack: "MERN", last_active: "2 hours ago" },
    RecentProject { code: "P2", name: "Mobile Fitness App", stack: "Flutter", last_active: "1 day ago" },
    RecentProject { code: "P3", name: "Data Analytics Tool", stack: "Python", last_active: "1 month ago" },
];

pub static STRONGEST_SKILLS: [(&str, u32); 5] = [
    ("Mobile Development", 90),
    ("Backend Development", 85),
    ("Cloud Architecture", 75),
    ("DevOps & CI/CD", 65),
    ("Web Frontend", 30),
];

pub struct Skill {
    pub skill: &'static str,
    pub level: u32,
    pub hours: u32,
    pub projects: u32,
}

pub static SKILLS: [Skill; 6] = [
    Skill { skill: "React", level: 95, hours: 450, projects: 12 },
    Skill { skill: "TypeScript", level: 92, hours: 380, projects: 10 },
    Skill { skill: "Node.js", level: 88, hours: 320, projects: 8 },
    Skill { skill: "Python", level: 85, hours: 290, projects: 7 },
    Skill { skill: "JavaScript", level: 98, hours: 520, projects: 15 },
    Skill { skill: "CSS/Tailwind", level: 90, hours: 410, projects: 14 },
];

/// React, TypeScript, Node.js and Python levels per month.
pub static SKILL_GROWTH: [(&str, [u32; 4]); 6] = [
    ("Jul", [85, 80, 75, 72]),
    ("Aug", [88, 83, 78, 76]),
    ("Sep", [90, 86, 82, 80]),
    ("Oct", [92, 88, 85, 82]),
    ("Nov", [93, 90, 87, 84]),
    ("Dec", [95, 92, 88, 85]),
];

pub static RADAR_SCORES: [(&str, u32); 6] = [
    ("Frontend", 95),
    ("Backend", 88),
    ("Database", 82),
    ("DevOps", 75),
    ("Testing", 85),
    ("Design", 78),
];

pub fn total_skill_hours() -> u32 {
    SKILLS.iter().map(|s| s.hours).sum()
}

pub struct ProjectLanguage {
    pub language: &'static str,
    pub lines: u32,
    pub percentage: u32,
    pub color: Color,
}

pub static PROJECT_LANGUAGES: [ProjectLanguage; 5] = [
    ProjectLanguage { language: "JavaScript", lines: 15420, percentage: 42, color: Color::hex(0x5B6FD8) },
    ProjectLanguage { language: "TypeScript", lines: 8340, percentage: 23, color: Color::hex(0x4ECDC4) },
    ProjectLanguage { language: "CSS/SCSS", lines: 5680, percentage: 15, color: Color::hex(0xFFD93D) },
    ProjectLanguage { language: "HTML", lines: 4230, percentage: 12, color: Color::hex(0xFF6B9D) },
    ProjectLanguage { language: "JSON", lines: 2890, percentage: 8, color: Color::hex(0x9CA3AF) },
];

/// Skill, proficiency, hours.
pub static PROJECT_TOP_SKILLS: [(&str, u32, u32); 3] = [
    ("React", 95, 89),
    ("Node.js", 88, 45),
    ("MongoDB", 82, 22),
];

/// Tool, hours, share.
pub static PROJECT_TOOLS: [(&str, u32, u32); 3] = [
    ("VS Code", 142, 91),
    ("Terminal", 8, 5),
    ("Browser DevTools", 6, 4),
];

pub static PROJECT_PLATFORMS: [(&str, &str); 3] = [
    ("Web App", "Primary"),
    ("Mobile Responsive", "Secondary"),
    ("API Backend", "Service"),
];

/// Week, hours, commits.
pub static PROJECT_WEEKLY_ACTIVITY: [(&str, u32, u32); 5] = [
    ("Week 1", 32, 45),
    ("Week 2", 38, 52),
    ("Week 3", 28, 38),
    ("Week 4", 35, 48),
    ("Week 5", 23, 31),
];

pub fn project_total_lines() -> u32 {
    PROJECT_LANGUAGES.iter().map(|l| l.lines).sum()
}

/// Editable name and description of the project shown on the detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectEditor {
    saved_name: String,
    pub name: String,
    pub description: String,
    editing: bool,
}

impl ProjectEditor {
    /// A missing or nameless project gets a placeholder name.
    pub fn new(project: Option<&ProjectRecord>) -> Self {
        let name = project
            .map(|p| p.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNTITLED_PROJECT)
            .to_string();
        Self {
            saved_name: name.clone(),
            name,
            description: DEFAULT_DESCRIPTION.to_string(),
            editing: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn saved_name(&self) -> &str {
        &self.saved_name
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    pub fn save(&mut self) {
        self.saved_name = self.name.clone();
        self.editing = false;
    }

    /// Drops the draft name and restores the last saved one.
    pub fn cancel(&mut self) {
        self.name = self.saved_name.clone();
        self.editing = false;
    }
}
