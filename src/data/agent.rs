#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    Friendly,
    #[default]
    Motivational,
    Professional,
    Casual,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Friendly,
        Tone::Motivational,
        Tone::Professional,
        Tone::Casual,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tone::Friendly => "Friendly",
            Tone::Motivational => "Motivational",
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Tone::Friendly => "😊",
            Tone::Motivational => "💪",
            Tone::Professional => "💼",
            Tone::Casual => "✨",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tone::Friendly => "Warm and approachable responses",
            Tone::Motivational => "Encouraging and energetic",
            Tone::Professional => "Formal and business-like",
            Tone::Casual => "Relaxed and conversational",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSettings {
    pub tone: Tone,
    pub play_sounds: bool,
    pub limit_notifications: bool,
    pub shutdown: bool,
    /// 0..=100
    pub volume: u8,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            tone: Tone::Motivational,
            play_sounds: true,
            limit_notifications: false,
            shutdown: false,
            volume: 70,
        }
    }
}

impl AgentSettings {
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
    }
}

pub struct AgentStats {
    pub total_nudges: u32,
    pub nudges_today: u32,
    pub avg_response: &'static str,
    pub success_rate: u8,
}

pub const AGENT_STATS: AgentStats = AgentStats {
    total_nudges: 1247,
    nudges_today: 47,
    avg_response: "15 min",
    success_rate: 94,
};
