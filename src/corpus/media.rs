//! Media pools for non-text messages, cycled deterministically by slot.

pub const IMAGE_URLS: &[&str] = &[
    "https://picsum.photos/seed/sunset/800/600",
    "https://picsum.photos/seed/coffee/800/600",
    "https://picsum.photos/seed/mountains/800/600",
    "https://picsum.photos/seed/city/800/600",
    "https://picsum.photos/seed/beach/800/600",
    "https://picsum.photos/seed/dog/800/600",
    "https://picsum.photos/seed/food/800/600",
    "https://picsum.photos/seed/concert/800/600",
];

pub const VIDEO_URLS: &[&str] = &[
    "https://cdn.chatseed.dev/videos/clip_01.mp4",
    "https://cdn.chatseed.dev/videos/clip_02.mp4",
    "https://cdn.chatseed.dev/videos/clip_03.mp4",
    "https://cdn.chatseed.dev/videos/clip_04.mp4",
];

pub const GIF_URLS: &[&str] = &[
    "https://cdn.chatseed.dev/gifs/thumbs_up.gif",
    "https://cdn.chatseed.dev/gifs/laughing.gif",
    "https://cdn.chatseed.dev/gifs/mind_blown.gif",
    "https://cdn.chatseed.dev/gifs/dancing.gif",
];

pub const STICKER_URLS: &[&str] = &[
    "https://cdn.chatseed.dev/stickers/happy.webp",
    "https://cdn.chatseed.dev/stickers/heart.webp",
    "https://cdn.chatseed.dev/stickers/facepalm.webp",
    "https://cdn.chatseed.dev/stickers/party.webp",
    "https://cdn.chatseed.dev/stickers/thinking.webp",
    "https://cdn.chatseed.dev/stickers/wave.webp",
];

pub const AUDIO_URLS: &[&str] = &[
    "https://cdn.chatseed.dev/audio/note_01.ogg",
    "https://cdn.chatseed.dev/audio/note_02.ogg",
    "https://cdn.chatseed.dev/audio/note_03.ogg",
    "https://cdn.chatseed.dev/audio/note_04.ogg",
];

pub const FILE_NAMES: &[&str] = &[
    "meeting_notes.pdf",
    "budget_2024.xlsx",
    "itinerary.docx",
    "recipe_collection.pdf",
    "workout_plan.pdf",
    "project_brief.pdf",
    "reading_list.txt",
    "photos_archive.zip",
];

/// (url, title, description, preview image)
pub const LINKS: &[(&str, &str, &str, &str)] = &[
    (
        "https://example.com/articles/remote-work",
        "Remote work is here to stay",
        "Why distributed teams keep outperforming expectations.",
        "https://picsum.photos/seed/remote/400/200",
    ),
    (
        "https://example.com/recipes/ramen",
        "20-minute weeknight ramen",
        "A shortcut ramen that still tastes slow-cooked.",
        "https://picsum.photos/seed/ramen/400/200",
    ),
    (
        "https://example.com/travel/lisbon",
        "48 hours in Lisbon",
        "Tram rides, pastel de nata, and miradouros.",
        "https://picsum.photos/seed/lisbon/400/200",
    ),
    (
        "https://example.com/tech/keyboards",
        "The mechanical keyboard rabbit hole",
        "Switches, keycaps, and why your wallet is in danger.",
        "https://picsum.photos/seed/keys/400/200",
    ),
    (
        "https://example.com/fitness/zone2",
        "Zone 2 training explained",
        "The boring cardio that actually works.",
        "https://picsum.photos/seed/run/400/200",
    ),
];
