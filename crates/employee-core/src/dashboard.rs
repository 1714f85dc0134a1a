//! Static content of the dashboard page

use serde::Serialize;

/// Month-over-month direction of a stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDirection {
    /// Shown in green
    Increase,
    /// Shown in red
    Decrease,
}

/// Icon drawn in a stat card header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatIcon {
    /// Group of people
    Users,
    /// Person with a check mark
    UserCheck,
    /// Person with a cross
    UserX,
    /// Rising trend line
    TrendingUp,
}

/// Summary metric card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    /// Card title
    pub title: &'static str,
    /// Headline figure, pre-formatted
    pub value: &'static str,
    /// Signed change, pre-formatted
    pub change: &'static str,
    /// Whether the change is good or bad news
    pub direction: ChangeDirection,
    /// Header icon
    pub icon: StatIcon,
}

impl StatCard {
    /// Caption under the headline figure
    #[must_use]
    pub fn change_caption(&self) -> String {
        format!("{} from last month", self.change)
    }
}

/// Colour of a recent-activity bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Green
    Green,
    /// Blue
    Blue,
    /// Orange
    Orange,
    /// Yellow
    Yellow,
    /// Purple
    Purple,
}

impl Tone {
    /// CSS modifier class
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Green => "tone-green",
            Self::Blue => "tone-blue",
            Self::Orange => "tone-orange",
            Self::Yellow => "tone-yellow",
            Self::Purple => "tone-purple",
        }
    }
}

/// Entry of the recent-activity list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity {
    /// What happened
    pub title: &'static str,
    /// Who or what it concerned
    pub detail: &'static str,
    /// Relative time label
    pub when: &'static str,
    /// Bullet colour
    pub tone: Tone,
}

/// Row of the department percentage bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepartmentShare {
    /// Department label
    pub department: &'static str,
    /// Share of headcount, whole percent
    pub percent: u8,
    /// Bar colour
    pub tone: Tone,
}

impl DepartmentShare {
    /// Inline style for the filled part of the bar
    #[must_use]
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.percent.min(100))
    }
}

const STAT_CARDS: [StatCard; 4] = [
    StatCard {
        title: "Total Employees",
        value: "1,234",
        change: "+12%",
        direction: ChangeDirection::Increase,
        icon: StatIcon::Users,
    },
    StatCard {
        title: "Active Employees",
        value: "1,187",
        change: "+8%",
        direction: ChangeDirection::Increase,
        icon: StatIcon::UserCheck,
    },
    StatCard {
        title: "On Leave",
        value: "47",
        change: "-3%",
        direction: ChangeDirection::Decrease,
        icon: StatIcon::UserX,
    },
    StatCard {
        title: "Growth Rate",
        value: "15.2%",
        change: "+2.1%",
        direction: ChangeDirection::Increase,
        icon: StatIcon::TrendingUp,
    },
];

const RECENT_ACTIVITIES: [Activity; 3] = [
    Activity {
        title: "New employee onboarded",
        detail: "John Smith joined Engineering team",
        when: "2 hours ago",
        tone: Tone::Green,
    },
    Activity {
        title: "Department updated",
        detail: "Marketing team structure changed",
        when: "5 hours ago",
        tone: Tone::Blue,
    },
    Activity {
        title: "Leave request",
        detail: "Sarah Wilson requested vacation leave",
        when: "1 day ago",
        tone: Tone::Orange,
    },
];

const DEPARTMENT_SHARES: [DepartmentShare; 4] = [
    DepartmentShare {
        department: "Engineering",
        percent: 45,
        tone: Tone::Blue,
    },
    DepartmentShare {
        department: "Marketing",
        percent: 25,
        tone: Tone::Green,
    },
    DepartmentShare {
        department: "Sales",
        percent: 20,
        tone: Tone::Yellow,
    },
    DepartmentShare {
        department: "HR",
        percent: 10,
        tone: Tone::Purple,
    },
];

/// Summary metric cards
#[must_use]
pub const fn stat_cards() -> &'static [StatCard] {
    &STAT_CARDS
}

/// Recent-activity list
#[must_use]
pub const fn recent_activities() -> &'static [Activity] {
    &RECENT_ACTIVITIES
}

/// Department percentage bars
#[must_use]
pub const fn department_shares() -> &'static [DepartmentShare] {
    &DEPARTMENT_SHARES
}
