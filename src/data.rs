use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Instagram,
    Twitter,
    LinkedIn,
    TikTok,
    Facebook,
    Pinterest,
    Multiple,
}

impl Platform {
    /// Choices offered when creating an automation.
    pub const AUTOMATION_CHOICES: [Platform; 5] = [
        Platform::Instagram,
        Platform::Twitter,
        Platform::LinkedIn,
        Platform::TikTok,
        Platform::Multiple,
    ];

    /// Choices offered when connecting an account.
    pub const CONNECT_CHOICES: [Platform; 6] = [
        Platform::Instagram,
        Platform::TikTok,
        Platform::Facebook,
        Platform::Twitter,
        Platform::LinkedIn,
        Platform::Pinterest,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter",
            Platform::LinkedIn => "LinkedIn",
            Platform::TikTok => "TikTok",
            Platform::Facebook => "Facebook",
            Platform::Pinterest => "Pinterest",
            Platform::Multiple => "Multiple",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::LinkedIn => "linkedin",
            Platform::TikTok => "tiktok",
            Platform::Facebook => "facebook",
            Platform::Pinterest => "pinterest",
            Platform::Multiple => "multiple",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomationStatus {
    Active,
    Paused,
}

impl AutomationStatus {
    pub fn label(self) -> &'static str {
        match self {
            AutomationStatus::Active => "Active",
            AutomationStatus::Paused => "Paused",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AutomationStatus::Active => AutomationStatus::Paused,
            AutomationStatus::Paused => AutomationStatus::Active,
        }
    }
}

pub const SCHEDULE_CHOICES: [&str; 5] = ["Daily", "Every 2 hours", "Hourly", "Weekly", "Custom"];

#[derive(Debug, Clone, PartialEq)]
pub struct Automation {
    pub id: u32,
    pub name: String,
    pub platform: Platform,
    pub status: AutomationStatus,
    pub schedule: String,
    pub last_run: String,
    pub next_run: String,
    pub description: String,
    pub stats: Vec<(String, String)>,
}

impl Automation {
    /// Next run as shown to the user; paused automations never run.
    pub fn next_run_label(&self) -> &str {
        match self.status {
            AutomationStatus::Active => &self.next_run,
            AutomationStatus::Paused => "Paused",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increase,
    Decrease,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub name: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStatus {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub platform: Platform,
    pub action: &'static str,
    pub time: &'static str,
    pub status: ActivityStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub text: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectedAccount {
    pub id: u64,
    pub platform: Platform,
    pub username: String,
    pub connected: bool,
}

impl ConnectedAccount {
    pub fn status_label(&self) -> &'static str {
        if self.connected {
            "active"
        } else {
            "disconnected"
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub timezone: String,
    pub bio: String,
}

pub const TIMEZONES: [(&str, &str); 7] = [
    ("America/New_York", "Eastern Time (ET)"),
    ("America/Chicago", "Central Time (CT)"),
    ("America/Denver", "Mountain Time (MT)"),
    ("America/Los_Angeles", "Pacific Time (PT)"),
    ("Europe/London", "London (GMT)"),
    ("Europe/Paris", "Paris (CET)"),
    ("Asia/Tokyo", "Tokyo (JST)"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    Basic,
    Pro,
    Business,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Basic, Plan::Pro, Plan::Business];

    pub fn label(self) -> &'static str {
        match self {
            Plan::Basic => "Basic",
            Plan::Pro => "Pro",
            Plan::Business => "Business",
        }
    }

    pub fn monthly_price(self) -> u32 {
        match self {
            Plan::Basic => 9,
            Plan::Pro => 29,
            Plan::Business => 79,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingCycle {
    Monthly,
    Annual,
}

impl BillingCycle {
    pub fn label(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Annual => "Annual",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Billing {
    pub plan: Plan,
    pub cycle: BillingCycle,
    pub next_billing_date: NaiveDate,
    pub card_last4: &'static str,
    pub card_expiry: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelPrefs {
    pub automation_results: bool,
    pub weekly_reports: bool,
    pub tips: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPrefs {
    pub email: ChannelPrefs,
    pub push: ChannelPrefs,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMetric {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub positive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Week,
    Year,
}

impl Period {
    pub fn toggled(self) -> Self {
        match self {
            Period::Week => Period::Year,
            Period::Year => Period::Week,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::Week => "Week",
            Period::Year => "Year",
        }
    }
}

/// Labels plus followers/engagement series for the dashboard growth chart.
pub struct GrowthSeries {
    pub labels: &'static [&'static str],
    pub followers: &'static [u32],
    pub engagement: &'static [u32],
}

pub fn growth_series(period: Period) -> GrowthSeries {
    match period {
        Period::Week => GrowthSeries {
            labels: &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            followers: &[2100, 2200, 2300, 2800, 3100, 3400, 3700],
            engagement: &[150, 180, 210, 250, 270, 300, 320],
        },
        Period::Year => GrowthSeries {
            labels: &[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            followers: &[
                1800, 2000, 2300, 2600, 3000, 3300, 3600, 4000, 4300, 4600, 5000, 5400,
            ],
            engagement: &[120, 140, 160, 190, 210, 240, 260, 290, 310, 340, 370, 400],
        },
    }
}

/// In-memory fixtures backing every screen.
#[derive(Debug, Clone)]
pub struct Store {
    pub automations: Vec<Automation>,
    pub stats: Vec<StatCard>,
    pub activities: Vec<Activity>,
    pub notifications: Vec<Notification>,
    pub key_metrics: Vec<KeyMetric>,
    pub profile: Profile,
    pub billing: Billing,
    pub notification_prefs: NotificationPrefs,
    pub accounts: Vec<ConnectedAccount>,
}

fn stats(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Store {
    pub fn new() -> Self {
        let automations = vec![
            Automation {
                id: 1,
                name: "Instagram Follow/Unfollow".into(),
                platform: Platform::Instagram,
                status: AutomationStatus::Active,
                schedule: "Daily at 10:00 AM".into(),
                last_run: "2 hours ago".into(),
                next_run: "Tomorrow at 10:00 AM".into(),
                description:
                    "Automatically follows targeted accounts and unfollows non-followers after 3 days"
                        .into(),
                stats: stats(&[
                    ("Follows today", "28"),
                    ("Unfollows today", "15"),
                    ("Total followed", "1243"),
                    ("Total unfollowed", "876"),
                ]),
            },
            Automation {
                id: 2,
                name: "Twitter Engagement".into(),
                platform: Platform::Twitter,
                status: AutomationStatus::Active,
                schedule: "Every 2 hours".into(),
                last_run: "35 minutes ago".into(),
                next_run: "In 1 hour 25 minutes".into(),
                description: "Likes and retweets content from specified hashtags and accounts"
                    .into(),
                stats: stats(&[
                    ("Likes today", "42"),
                    ("Retweets today", "12"),
                    ("Total likes", "2156"),
                    ("Total retweets", "543"),
                ]),
            },
            Automation {
                id: 3,
                name: "LinkedIn Connection Requests".into(),
                platform: Platform::LinkedIn,
                status: AutomationStatus::Paused,
                schedule: "Weekdays at 9:00 AM".into(),
                last_run: "2 days ago".into(),
                next_run: "Monday at 9:00 AM".into(),
                description:
                    "Sends personalized connection requests to people in your target industry"
                        .into(),
                stats: stats(&[
                    ("Requests today", "0"),
                    ("Accepted today", "3"),
                    ("Total requests", "450"),
                    ("Total accepted", "312"),
                ]),
            },
            Automation {
                id: 4,
                name: "TikTok Comment Responder".into(),
                platform: Platform::TikTok,
                status: AutomationStatus::Active,
                schedule: "Every hour".into(),
                last_run: "48 minutes ago".into(),
                next_run: "In 12 minutes".into(),
                description: "Automatically responds to comments on your TikTok videos using AI"
                    .into(),
                stats: stats(&[
                    ("Responses today", "17"),
                    ("Engagement rate", "24%"),
                    ("Total responses", "876"),
                    ("Avg response time", "3 min"),
                ]),
            },
            Automation {
                id: 5,
                name: "Content Scheduler".into(),
                platform: Platform::Multiple,
                status: AutomationStatus::Active,
                schedule: "Custom schedule".into(),
                last_run: "6 hours ago".into(),
                next_run: "Today at 6:00 PM".into(),
                description:
                    "Posts pre-planned content across multiple platforms based on your content calendar"
                        .into(),
                stats: stats(&[
                    ("Posts today", "3"),
                    ("Scheduled next", "5"),
                    ("Total posts", "127"),
                    ("Engagement avg", "18%"),
                ]),
            },
        ];

        let stats = vec![
            StatCard {
                name: "Active Automations",
                value: "12",
                change: "+3",
                trend: Trend::Increase,
            },
            StatCard {
                name: "Total Followers",
                value: "24,521",
                change: "+2.3%",
                trend: Trend::Increase,
            },
            StatCard {
                name: "Engagement Rate",
                value: "5.4%",
                change: "+0.8%",
                trend: Trend::Increase,
            },
            StatCard {
                name: "Posts Scheduled",
                value: "47",
                change: "+12",
                trend: Trend::Increase,
            },
        ];

        let activities = vec![
            Activity {
                platform: Platform::Instagram,
                action: "Followed 15 accounts",
                time: "10 minutes ago",
                status: ActivityStatus::Success,
            },
            Activity {
                platform: Platform::Twitter,
                action: "Posted scheduled tweet",
                time: "25 minutes ago",
                status: ActivityStatus::Success,
            },
            Activity {
                platform: Platform::TikTok,
                action: "Automation paused",
                time: "1 hour ago",
                status: ActivityStatus::Warning,
            },
            Activity {
                platform: Platform::LinkedIn,
                action: "Connected with 8 profiles",
                time: "3 hours ago",
                status: ActivityStatus::Success,
            },
            Activity {
                platform: Platform::Facebook,
                action: "Page post engagement",
                time: "5 hours ago",
                status: ActivityStatus::Success,
            },
        ];

        let notifications = vec![
            Notification {
                id: 1,
                text: "Instagram automation completed".into(),
                time: "2 min ago".into(),
            },
            Notification {
                id: 2,
                text: "New followers gained: +15".into(),
                time: "1 hour ago".into(),
            },
            Notification {
                id: 3,
                text: "TikTok engagement up by 23%".into(),
                time: "3 hours ago".into(),
            },
        ];

        let key_metrics = vec![
            KeyMetric {
                title: "Total Followers",
                value: "8,742",
                change: "+12.5%",
                positive: true,
            },
            KeyMetric {
                title: "Engagement Rate",
                value: "5.8%",
                change: "+2.3%",
                positive: true,
            },
            KeyMetric {
                title: "Comments",
                value: "1,254",
                change: "+18.7%",
                positive: true,
            },
            KeyMetric {
                title: "Impressions",
                value: "45.2K",
                change: "-3.1%",
                positive: false,
            },
        ];

        let profile = Profile {
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            phone: "+1 (555) 123-4567".into(),
            timezone: "America/New_York".into(),
            bio: "Digital marketing specialist with a focus on social media growth and automation."
                .into(),
        };

        let billing = Billing {
            plan: Plan::Pro,
            cycle: BillingCycle::Monthly,
            next_billing_date: NaiveDate::from_ymd_opt(2023, 8, 15).unwrap_or_default(),
            card_last4: "4242",
            card_expiry: "04/25",
        };

        let notification_prefs = NotificationPrefs {
            email: ChannelPrefs {
                automation_results: true,
                weekly_reports: true,
                tips: false,
            },
            push: ChannelPrefs {
                automation_results: true,
                weekly_reports: false,
                tips: true,
            },
        };

        let accounts = vec![
            ConnectedAccount {
                id: 1,
                platform: Platform::Instagram,
                username: "johndoe_official".into(),
                connected: true,
            },
            ConnectedAccount {
                id: 2,
                platform: Platform::TikTok,
                username: "johndoe_tiktok".into(),
                connected: true,
            },
            ConnectedAccount {
                id: 3,
                platform: Platform::Facebook,
                username: "John Doe".into(),
                connected: false,
            },
        ];

        Self {
            automations,
            stats,
            activities,
            notifications,
            key_metrics,
            profile,
            billing,
            notification_prefs,
            accounts,
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
