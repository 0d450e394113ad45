use clap::ValueEnum;
use std::fmt;

/// One published sheet per entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum EntityKind {
    Notifications,
    Clubs,
    Events,
    PgRooms,
    DutyLeaves,
    Notes,
    Courses,
    Deals,
    AiTools,
    Youtube,
}

impl EntityKind {
    pub const ALL: [EntityKind; 10] = [
        EntityKind::Notifications,
        EntityKind::Clubs,
        EntityKind::Events,
        EntityKind::PgRooms,
        EntityKind::DutyLeaves,
        EntityKind::Notes,
        EntityKind::Courses,
        EntityKind::Deals,
        EntityKind::AiTools,
        EntityKind::Youtube,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Notifications => "notifications",
            EntityKind::Clubs => "clubs",
            EntityKind::Events => "events",
            EntityKind::PgRooms => "pg-rooms",
            EntityKind::DutyLeaves => "duty-leaves",
            EntityKind::Notes => "notes",
            EntityKind::Courses => "courses",
            EntityKind::Deals => "deals",
            EntityKind::AiTools => "ai-tools",
            EntityKind::Youtube => "youtube",
        }
    }

    /// Heading shown above listings.
    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Notifications => "Notifications",
            EntityKind::Clubs => "Clubs",
            EntityKind::Events => "Events",
            EntityKind::PgRooms => "PG Rooms",
            EntityKind::DutyLeaves => "Duty Leaves",
            EntityKind::Notes => "Notes",
            EntityKind::Courses => "Free Courses",
            EntityKind::Deals => "Deals",
            EntityKind::AiTools => "AI Tools",
            EntityKind::Youtube => "YouTube Channels",
        }
    }

    /// Message used when a listing comes back empty.
    pub fn empty_message(&self) -> &'static str {
        match self {
            EntityKind::Deals => "No items found matching your filters.",
            EntityKind::Youtube => "Try adjusting your filters or search keywords.",
            EntityKind::DutyLeaves => "No duty leave records.",
            _ => "Nothing found.",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
