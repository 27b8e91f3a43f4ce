use std::fmt;

use crate::models::TimePeriod;

pub struct TrendPoint {
    pub time: &'static str,
    pub all: u32,
    pub productivity: u32,
    pub coding: u32,
    pub distraction: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricFilter {
    #[default]
    All,
    Productivity,
    Coding,
    Distraction,
}

impl MetricFilter {
    pub const ALL: [MetricFilter; 4] = [
        MetricFilter::All,
        MetricFilter::Productivity,
        MetricFilter::Coding,
        MetricFilter::Distraction,
    ];
}

impl fmt::Display for MetricFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MetricFilter::All => "All Metrics",
            MetricFilter::Productivity => "Productivity",
            MetricFilter::Coding => "Coding",
            MetricFilter::Distraction => "Distraction",
        })
    }
}

impl TrendPoint {
    pub fn value(&self, filter: MetricFilter) -> u32 {
        match filter {
            MetricFilter::All => self.all,
            MetricFilter::Productivity => self.productivity,
            MetricFilter::Coding => self.coding,
            MetricFilter::Distraction => self.distraction,
        }
    }
}

macro_rules! points {
    ($(($time:expr, $all:expr, $productivity:expr, $coding:expr, $distraction:expr)),* $(,)?) => {
        [$(TrendPoint {
            time: $time,
            all: $all,
            productivity: $productivity,
            coding: $coding,
            distraction: $distraction,
        }),*]
    };
}

static HOURLY: [TrendPoint; 12] = points![
    ("00:00", 45, 50, 40, 15),
    ("02:00", 30, 35, 25, 10),
    ("04:00", 20, 22, 18, 5),
    ("06:00", 25, 28, 22, 8),
    ("08:00", 60, 65, 55, 20),
    ("10:00", 75, 80, 70, 25),
    ("12:00", 70, 72, 68, 22),
    ("14:00", 85, 90, 80, 30),
    ("16:00", 80, 82, 78, 28),
    ("18:00", 65, 68, 62, 18),
    ("20:00", 50, 55, 45, 15),
    ("22:00", 40, 42, 38, 12),
];

static WEEKLY: [TrendPoint; 7] = points![
    ("MON", 70, 75, 65, 22),
    ("TUE", 78, 82, 74, 25),
    ("WED", 85, 88, 82, 28),
    ("THU", 80, 83, 77, 26),
    ("FRI", 75, 78, 72, 24),
    ("SAT", 55, 60, 50, 15),
    ("SUN", 45, 50, 40, 12),
];

static MONTHLY: [TrendPoint; 7] = points![
    ("1", 65, 70, 60, 20),
    ("5", 72, 75, 69, 22),
    ("10", 68, 72, 64, 18),
    ("15", 85, 88, 82, 28),
    ("20", 78, 80, 76, 25),
    ("25", 82, 85, 79, 26),
    ("30", 75, 78, 72, 24),
];

static YEARLY: [TrendPoint; 12] = points![
    ("JAN", 65, 70, 60, 20),
    ("FEB", 72, 75, 69, 22),
    ("MAR", 68, 72, 64, 19),
    ("APR", 85, 88, 82, 28),
    ("MAY", 78, 80, 76, 24),
    ("JUN", 82, 85, 79, 26),
    ("JUL", 90, 92, 88, 30),
    ("AUG", 75, 78, 72, 23),
    ("SEP", 80, 83, 77, 25),
    ("OCT", 88, 90, 86, 29),
    ("NOV", 85, 87, 83, 27),
    ("DEC", 70, 73, 67, 21),
];

pub fn series(period: TimePeriod) -> &'static [TrendPoint] {
    match period {
        TimePeriod::Day => &HOURLY,
        TimePeriod::Week => &WEEKLY,
        TimePeriod::Month => &MONTHLY,
        TimePeriod::Year => &YEARLY,
    }
}

/// Mean of the filtered metric over the period.
pub fn average(period: TimePeriod, filter: MetricFilter) -> f32 {
    let points = series(period);
    if points.is_empty() {
        return 0.0;
    }
    let total: u32 = points.iter().map(|p| p.value(filter)).sum();
    total as f32 / points.len() as f32
}

pub fn peak(period: TimePeriod, filter: MetricFilter) -> Option<&'static TrendPoint> {
    series(period).iter().max_by_key(|p| p.value(filter))
}
