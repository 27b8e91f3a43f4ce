use std::collections::BTreeSet;

pub struct UserProfile {
    pub name: &'static str,
    pub username: &'static str,
    pub bio: &'static str,
    pub location: &'static str,
    pub join_date: &'static str,
    pub email: &'static str,
    pub website: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub twitter: &'static str,
}

pub static USER: UserProfile = UserProfile {
    name: "John Doe",
    username: "@johndoe",
    bio: "Full-stack developer passionate about building scalable web applications. \
          Experienced in React, TypeScript, and Node.js. Always learning and exploring new technologies.",
    location: "San Francisco, CA",
    join_date: "January 2023",
    email: "john.doe@example.com",
    website: "johndoe.dev",
    github: "johndoe",
    linkedin: "johndoe",
    twitter: "johndoe",
};

pub struct ProfileStats {
    pub total_projects: u32,
    pub total_hours: u32,
    pub avg_productivity: u32,
    pub streak: u32,
}

pub static STATS: ProfileStats = ProfileStats {
    total_projects: 24,
    total_hours: 1847,
    avg_productivity: 87,
    streak: 42,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileProject {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub total_hours: u32,
    pub status: String,
    pub skills: Vec<String>,
    pub productivity: u32,
}

fn profile_projects() -> Vec<ProfileProject> {
    [
        (
            1,
            "E-Commerce Platform",
            "Full-stack e-commerce solution with React and Node.js",
            "3 months",
            342,
            "Completed",
            &["React", "Node.js", "PostgreSQL", "AWS"][..],
            92,
        ),
        (
            2,
            "Analytics Dashboard",
            "Real-time analytics dashboard with data visualization",
            "2 months",
            245,
            "Active",
            &["React", "D3.js", "Python", "MongoDB"][..],
            88,
        ),
        (
            3,
            "Mobile Fitness App",
            "Cross-platform fitness tracker with workout plans",
            "4 months",
            410,
            "Completed",
            &["Flutter", "Firebase", "Dart"][..],
            90,
        ),
    ]
    .into_iter()
    .map(
        |(id, title, description, duration, total_hours, status, skills, productivity)| {
            ProfileProject {
                id,
                title: title.to_string(),
                description: description.to_string(),
                duration: duration.to_string(),
                total_hours,
                status: status.to_string(),
                skills: skills.iter().map(|s| s.to_string()).collect(),
                productivity,
            }
        },
    )
    .collect()
}

pub struct ProfileSkill {
    pub name: &'static str,
    pub level: u32,
    pub category: &'static str,
    pub hours: u32,
}

/// Ranked by level.
pub static PROFILE_SKILLS: [ProfileSkill; 8] = [
    ProfileSkill { name: "React", level: 95, category: "Frontend", hours: 520 },
    ProfileSkill { name: "TypeScript", level: 92, category: "Language", hours: 480 },
    ProfileSkill { name: "Node.js", level: 88, category: "Backend", hours: 410 },
    ProfileSkill { name: "Python", level: 85, category: "Language", hours: 380 },
    ProfileSkill { name: "PostgreSQL", level: 82, category: "Database", hours: 340 },
    ProfileSkill { name: "Docker", level: 78, category: "DevOps", hours: 310 },
    ProfileSkill { name: "GraphQL", level: 75, category: "API", hours: 290 },
    ProfileSkill { name: "AWS", level: 72, category: "Cloud", hours: 260 },
];

pub struct ProfileApp {
    pub name: &'static str,
    pub hours: u32,
    pub percentage: u32,
}

pub static PROFILE_APPS: [ProfileApp; 5] = [
    ProfileApp { name: "VS Code", hours: 842, percentage: 45 },
    ProfileApp { name: "Chrome", hours: 420, percentage: 23 },
    ProfileApp { name: "Terminal", hours: 312, percentage: 17 },
    ProfileApp { name: "Figma", hours: 156, percentage: 8 },
    ProfileApp { name: "Slack", hours: 117, percentage: 7 },
];

pub struct ProfileLanguage {
    pub name: &'static str,
    pub percentage: u32,
    pub hours: u32,
    pub lines: u32,
}

pub static PROFILE_LANGUAGES: [ProfileLanguage; 5] = [
    ProfileLanguage { name: "TypeScript", percentage: 42, hours: 654, lines: 125_000 },
    ProfileLanguage { name: "JavaScript", percentage: 28, hours: 436, lines: 89_000 },
    ProfileLanguage { name: "Python", percentage: 18, hours: 280, lines: 52_000 },
    ProfileLanguage { name: "HTML/CSS", percentage: 8, hours: 124, lines: 28_000 },
    ProfileLanguage { name: "SQL", percentage: 4, hours: 62, lines: 8_500 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Skills,
    Apps,
    Languages,
}

impl Section {
    /// Whether `name` is one of this section's table entries.
    fn contains(self, name: &str) -> bool {
        match self {
            Section::Skills => PROFILE_SKILLS.iter().any(|s| s.name == name),
            Section::Apps => PROFILE_APPS.iter().any(|a| a.name == name),
            Section::Languages => PROFILE_LANGUAGES.iter().any(|l| l.name == name),
        }
    }
}

/// Profile page state: edit mode, what is shown publicly, and project order.
/// Skills, apps and languages keep their table order; only visibility is stored here.
#[derive(Debug, Clone)]
pub struct ProfileLayout {
    pub edit_mode: bool,
    hidden: BTreeSet<(Section, &'static str)>,
    hidden_projects: Vec<u32>,
    projects: Vec<ProfileProject>,
}

impl Default for ProfileLayout {
    fn default() -> Self {
        Self {
            edit_mode: false,
            hidden: BTreeSet::new(),
            hidden_projects: Vec::new(),
            projects: profile_projects(),
        }
    }
}

impl ProfileLayout {
    pub fn is_visible(&self, section: Section, name: &str) -> bool {
        section.contains(name) && !self.hidden.iter().any(|&(s, n)| s == section && n == name)
    }

    /// Hidden skills stay listed (dimmed); hidden apps and languages are only
    /// listed while editing.
    pub fn is_listed(&self, section: Section, name: &str) -> bool {
        match section {
            Section::Skills => section.contains(name),
            Section::Apps | Section::Languages => {
                section.contains(name) && (self.edit_mode || self.is_visible(section, name))
            }
        }
    }

    /// Unknown names are ignored.
    pub fn toggle(&mut self, section: Section, name: &'static str) {
        if !section.contains(name) {
            return;
        }
        if !self.hidden.remove(&(section, name)) {
            self.hidden.insert((section, name));
        }
    }

    pub fn projects(&self) -> &[ProfileProject] {
        &self.projects
    }

    pub fn is_project_visible(&self, id: u32) -> bool {
        !self.hidden_projects.contains(&id)
    }

    pub fn toggle_project(&mut self, id: u32) {
        if let Some(pos) = self.hidden_projects.iter().position(|&h| h == id) {
            self.hidden_projects.remove(pos);
        } else {
            self.hidden_projects.push(id);
        }
    }

    /// Moves a project one slot up or down; out-of-range moves are no-ops.
    pub fn move_project(&mut self, id: u32, up: bool) {
        let Some(index) = self.projects.iter().position(|p| p.id == id) else {
            return;
        };
        let target = if up {
            index.checked_sub(1)
        } else {
            Some(index + 1).filter(|&t| t < self.projects.len())
        };
        if let Some(target) = target {
            self.projects.swap(index, target);
        }
    }
}
