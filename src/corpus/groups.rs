//! Group naming and themed avatar tables.

/// (name, emoji candidates). Empty candidate slots are skipped when an emoji
/// is appended; the emoji is only appended for even conversation indices.
pub const GROUP_NAMES: &[(&str, &[&str])] = &[
    ("Weekend Warriors", &["⚔️", "🏕️"]),
    ("Coffee Addicts", &["☕", ""]),
    ("Road Trip Crew", &["🚗", "🗺️"]),
    ("Study Buddies", &["📚", "✏️"]),
    ("Movie Night", &["🎬", "🍿"]),
    ("Foodies United", &["🍜", "🍕"]),
    ("The Inner Circle", &["", "🔵"]),
    ("Morning Runners", &["🏃", ""]),
    ("Game Night Squad", &["🎮", "🎲"]),
    ("Family Group", &["👨‍👩‍👧‍👦", "❤️"]),
    ("Book Worms", &["📖", ""]),
    ("Beach Bums", &["🏖️", "🌊"]),
    ("Gym Rats", &["💪", "🏋️"]),
    ("Karaoke Krew", &["🎤", "🎶"]),
    ("Office Memes", &["😂", ""]),
    ("Work Chat", &["💼", "📊"]),
    ("Secret Santas", &["🎅", "🎁"]),
    ("Plant Parents", &["🪴", "🌱"]),
    ("Project Phoenix", &["🔥", ""]),
    ("Trivia Titans", &["🧠", "🏆"]),
    ("Sunday Brunch", &["🥞", "🥂"]),
    ("Book Club", &["", "📚"]),
    ("Night Owls", &["🦉", "🌙"]),
    ("Photography Walks", &["📷", ""]),
    ("Design Collective", &["🎨", "✨"]),
    ("Carpool Lane", &["🚙", ""]),
    ("Dog Park Gang", &["🐕", "🦴"]),
    ("Travel Bugs", &["✈️", "🌍"]),
    ("Quiz Masters", &["❓", "🏅"]),
    ("Soup Season", &["🍲", ""]),
    ("Fitness Freaks", &["🔥", "💪"]),
    ("Ski Trip Planning", &["⛷️", "🏔️"]),
    ("Poker Face", &["🃏", ""]),
    ("College Friends", &["🎓", "🍻"]),
    ("Garage Band", &["🎸", "🥁"]),
    ("Neighborhood Watch", &["🏘️", ""]),
    ("Dinner Club", &["🍽️", "🍷"]),
    ("Marathon Training", &["🏅", "🏃"]),
    ("Side Hustle", &["💡", "💸"]),
    ("Study Group Alpha", &["📐", ""]),
];

/// Hand-picked candidates for the forced "Best Friends" group.
pub const BEST_FRIENDS_EMOJIS: &[&str] = &["💯", "🎉", "🫶"];

/// Ordered substring rules mapping a lowercased group name to a themed
/// avatar. First match wins; order is load-bearing because keywords overlap.
pub const GROUP_AVATAR_RULES: &[(&[&str], &str)] = &[
    (&["family"], "https://picsum.photos/seed/grp-family/200"),
    (&["work", "office"], "https://picsum.photos/seed/grp-work/200"),
    (&["friend"], "https://picsum.photos/seed/grp-friends/200"),
    (&["school"], "https://picsum.photos/seed/grp-school/200"),
    (&["college"], "https://picsum.photos/seed/grp-college/200"),
    (&["university"], "https://picsum.photos/seed/grp-university/200"),
    (&["research", "lab", "science"], "https://picsum.photos/seed/grp-science/200"),
    (&["team"], "https://picsum.photos/seed/grp-team/200"),
    (&["project"], "https://picsum.photos/seed/grp-project/200"),
    (&["exam", "test", "quiz"], "https://picsum.photos/seed/grp-exam/200"),
    (&["study", "class", "homework"], "https://picsum.photos/seed/grp-study/200"),
    (&["game"], "https://picsum.photos/seed/grp-gaming/200"),
    (&["sport"], "https://picsum.photos/seed/grp-sports/200"),
    (&["music"], "https://picsum.photos/seed/grp-music/200"),
    (&["travel", "trip"], "https://picsum.photos/seed/grp-travel/200"),
    (&["food", "cook"], "https://picsum.photos/seed/grp-food/200"),
    (&["fit", "gym"], "https://picsum.photos/seed/grp-fitness/200"),
];
