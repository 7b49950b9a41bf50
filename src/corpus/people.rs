//! Name, avatar, and status pools for user fabrication.

pub const FIRST_NAMES: &[&str] = &[
    "Aisha", "Ben", "Carlos", "Diana", "Elena", "Felix", "Grace", "Hassan",
    "Ivy", "Jonas", "Kira", "Liam", "Maya", "Noah", "Olivia", "Pedro",
    "Quinn", "Rosa", "Sam", "Tara", "Umar", "Vera", "Wes", "Yara",
];

pub const LAST_NAMES: &[&str] = &[
    "Adams", "Bauer", "Chen", "Diaz", "Evans", "Fischer", "Garcia", "Huang",
    "Ivanov", "Jensen", "Khan", "Lopez", "Miller", "Nguyen", "Okafor",
    "Patel", "Quintero", "Rossi", "Silva", "Tanaka", "Udo", "Vargas",
    "Weber", "Yamamoto",
];

/// General-purpose avatar pool, cycled by index.
pub const AVATAR_POOL: &[&str] = &[
    "https://i.pravatar.cc/150?img=1",
    "https://i.pravatar.cc/150?img=5",
    "https://i.pravatar.cc/150?img=8",
    "https://i.pravatar.cc/150?img=12",
    "https://i.pravatar.cc/150?img=15",
    "https://i.pravatar.cc/150?img=20",
    "https://i.pravatar.cc/150?img=23",
    "https://i.pravatar.cc/150?img=28",
    "https://i.pravatar.cc/150?img=32",
    "https://i.pravatar.cc/150?img=36",
    "https://i.pravatar.cc/150?img=41",
    "https://i.pravatar.cc/150?img=47",
];

/// Status pool; `None` slots leave the field empty for some users.
pub const STATUS_MESSAGES: &[Option<&str>] = &[
    Some("Hey there! I am using this app."),
    None,
    Some("Busy"),
    Some("At the gym 💪"),
    None,
    Some("Available"),
    Some("In a meeting"),
    Some("Sleeping 😴"),
    None,
    Some("Out exploring 🌍"),
    Some("Battery about to die"),
    None,
];
