//! Trailing-message scripts for the guaranteed-unread conversations.
//! All lines come from participants other than the current user.

/// Conversation-specific scripts for direct guaranteed-unread chats,
/// keyed by conversation index.
pub const DIRECT_UNREAD_SCRIPTS: &[(usize, &[&str])] = &[
    (
        1,
        &[
            "Hey, are you coming tonight?",
            "Let me know soon, I need to book the table",
        ],
    ),
    (
        2,
        &[
            "Okay so update on the apartment saga",
            "The balcony one got taken",
            "BUT the heating one dropped the rent",
            "I'm signing tomorrow unless you talk me out of it",
            "...hello? This is time sensitive 😅",
        ],
    ),
    (7, &["Sent you the new ETA, see you at arrivals?"]),
];

/// Theme-matched scripts for group guaranteed-unread chats, evaluated
/// first-match-wins against the lowercased title.
pub const GROUP_UNREAD_SCRIPTS: &[(&[&str], &[&str])] = &[
    (
        &["study", "school", "class"],
        &[
            "Room 204 is booked for tomorrow",
            "Bring the worked examples",
            "Professor posted two extra practice sets",
            "They look exactly like the midterm format",
            "Starting at 10 sharp, don't be late",
            "Coffee run before, usual orders?",
            "I'll grab the whiteboard markers",
            "Someone claim the corner table when you arrive",
            "Also the deadline for the problem set moved",
            "It's Friday now, not Monday",
            "So we should finish it tomorrow too",
            "Ambitious but doable",
            "Okay logging off, see everyone at 10",
            "Reminder: QUIET floor, we got warned last time",
            "Last one there buys the pastries 🥐",
        ],
    ),
    (
        &["game", "gaming"],
        &["Lobby's up", "We need one more for ranked", "Get online!!"],
    ),
    (
        &["fit", "gym"],
        &["Class moved to 7am", "Bring your own mat tomorrow", "Who's in?"],
    ),
];

/// Generic follow-up pools, cycled by conversation index when no specific
/// script exists or the script runs out of lines.
pub const GENERIC_FOLLOW_UPS: &[&[&str]] = &[
    &[
        "Hey, you there?",
        "Got a minute?",
        "Ping me when you see this",
        "It's not urgent but it kind of is",
    ],
    &[
        "Quick question when you're free",
        "Actually, never mind, solved it",
        "Wait no, question stands",
        "Call me when you can 😅",
    ],
    &[
        "Don't forget about tomorrow!",
        "Bringing anything?",
        "I'll be there around 6",
        "See you then 👋",
    ],
];
