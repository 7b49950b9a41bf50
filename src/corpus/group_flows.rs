//! Themed multi-party scripts for group chats. A script line addresses the
//! current user or one of the first four other participants positionally;
//! the generator clamps slots that exceed the actual roster.
//!
//! `GROUP_FLOW_RULES` is evaluated first-match-wins against the lowercased
//! group title, so "best friend" must stay ahead of "friend".

use crate::models::MessageType;

use super::line::{FlowLine, Speaker};

const ME: Speaker = Speaker::Me;
const P1: Speaker = Speaker::Other(0);
const P2: Speaker = Speaker::Other(1);
const P3: Speaker = Speaker::Other(2);

pub const BEST_FRIENDS_FLOW: &[FlowLine] = &[
    FlowLine::other(0, "GUYS. Big news"),
    FlowLine::me("You can't just say that and go quiet"),
    FlowLine::other(1, "@p1 spill NOW"),
    FlowLine::other(0, "I got the apartment!!! The one with the rooftop"),
    FlowLine::me("SHUT UP. Housewarming when??").as_reply(),
    FlowLine::other(2, "This is the best thing I've heard all week"),
    FlowLine::other(1, "Rooftop summer confirmed 😎"),
    FlowLine::media(P1, MessageType::Image, "The view!!!"),
    FlowLine::other(3, "Okay that's stunning"),
    FlowLine::me("We're christening that rooftop this weekend, no debate"),
    FlowLine::other(0, "Saturday. Bring everything"),
    FlowLine::media(P2, MessageType::Sticker, "party"),
];

pub const FAMILY_FLOW: &[FlowLine] = &[
    FlowLine::other(0, "Don't forget Sunday lunch at ours, 1pm sharp"),
    FlowLine::other(1, "Can we make it 1:30? Choir runs late"),
    FlowLine::other(0, "Fine, 1:30. But the roast waits for no one"),
    FlowLine::me("I'm bringing dessert. The lemon tart"),
    FlowLine::other(2, "The famous tart returns 🙌"),
    FlowLine::media(P1, MessageType::Image, "Look who I found going through the old albums"),
    FlowLine::me("Oh no, is that me with the bowl cut"),
    FlowLine::other(0, "It was a very practical haircut").as_reply(),
    FlowLine::other(1, "It's the family archive, nothing is ever deleted 😂"),
    FlowLine::other(2, "Framing it for Sunday"),
    FlowLine::me("I'm unbringing the tart"),
    FlowLine::other(0, "You wouldn't dare"),
];

pub const WORK_FLOW: &[FlowLine] = &[
    FlowLine::other(0, "Heads up: client moved the review to Thursday 10am"),
    FlowLine::me("Thursday?? The deck isn't ready"),
    FlowLine::other(1, "It will be. @me can you own slides 4-9?"),
    FlowLine::me("On it. Draft by tomorrow EOD"),
    FlowLine::media(P2, MessageType::File, "Latest numbers for the appendix"),
    FlowLine::other(0, "Perfect, folding those in").as_reply(),
    FlowLine::other(2, "Do we have the updated logo assets anywhere?"),
    FlowLine::other(1, "Shared drive, brand folder. Refreshed last week"),
    FlowLine::me("Dry run Wednesday 4pm?"),
    FlowLine::other(0, "Booked. Same room as last time"),
    FlowLine::other(2, "Calendar invite sent 👍"),
];

pub const FRIENDS_FLOW: &[FlowLine] = &[
    FlowLine::other(0, "Who's free Friday? Thinking bowling"),
    FlowLine::other(1, "Only if we don't keep score this time"),
    FlowLine::me("We keep score. That's the whole sport"),
    FlowLine::other(2, "Last time @p2 threw it backwards"),
    FlowLine::other(1, "ONE time. And the floor was slippery"),
    FlowLine::media(P3, MessageType::Gif, "bowling fail"),
    FlowLine::me("😂😂 okay Friday 8pm, lanes are booked"),
    FlowLine::other(0, "Loser buys the pizza"),
    FlowLine::other(1, "...fine. I've been practicing"),
    FlowLine::me("Famous last words"),
];

pub const STUDY_FLOW: &[FlowLine] = &[
    FlowLine::other(0, "Midterm is in NINE days, how are we feeling"),
    FlowLine::me("Chapter 6 makes no sense and I've read it three times"),
    FlowLine::other(1, "Same. The professor's notes skip half the derivation"),
    FlowLine::media(P2, MessageType::File, "Found last year's worked examples"),
    FlowLine::other(0, "You're a lifesaver").as_reply(),
    FlowLine::me("Library session tomorrow? Third floor, the quiet corner"),
    FlowLine::other(1, "In. Bringing flashcards"),
    FlowLine::other(2, "I'll book the group room just in case"),
    FlowLine::other(0, "10am. Coffee first, calculus second"),
    FlowLine::me("Correct priorities 📚"),
];

pub const GAMING_FLOW: &[FlowLine] = &[
    FlowLine::other(0, "Ranked tonight? I'm two wins from promotion"),
    FlowLine::me("I'm in after 9"),
    FlowLine::other(1, "Who's filling support? Not me. Not again"),
    FlowLine::other(2, "I'll support if someone finally buys wards"),
    FlowLine::me("@p2 we ALL buy wards, it was one bad game"),
    FlowLine::other(0, "One? Generous"),
    FlowLine::media(P1, MessageType::Video, "Clip from last night, watch the ending"),
    FlowLine::other(1, "THAT ESCAPE 😱").as_reply(),
    FlowLine::me("Okay that was clean"),
    FlowLine::other(0, "9pm. Be there. Promotion awaits"),
    FlowLine::media(ME, MessageType::Sticker, "game on"),
];

pub const FITNESS_FLOW: &[FlowLine] = &[
    FlowLine::other(0, "6am class tomorrow, who's actually coming"),
    FlowLine::me("Define 'actually'"),
    FlowLine::other(1, "I'll be there. Someone has to hold the team standard"),
    FlowLine::other(2, "My legs are still broken from Tuesday"),
    FlowLine::other(0, "Tuesday was a warm-up 😈"),
    FlowLine::me("Your warm-ups violate several conventions"),
    FlowLine::media(P1, MessageType::Image, "Post-workout breakfast motivation"),
    FlowLine::other(2, "Okay that helps").as_reply(),
    FlowLine::me("Fine. 6am. If I die, avenge me"),
    FlowLine::other(0, "That's the spirit 💪"),
];

pub const FOOD_FLOW: &[FlowLine] = &[
    FlowLine::other(0, "Potluck theme vote: street food or comfort classics?"),
    FlowLine::me("Street food, obviously"),
    FlowLine::other(1, "Comfort classics and I'm bringing the mac and cheese"),
    FlowLine::other(2, "You can't dangle the mac and cheese as a bribe"),
    FlowLine::other(1, "Watch me"),
    FlowLine::media(P1, MessageType::Image, "Exhibit A, last time's batch"),
    FlowLine::me("...changing my vote").as_reply(),
    FlowLine::other(0, "Bribery works, noted. Comfort classics it is"),
    FlowLine::other(2, "Democracy died for cheese"),
    FlowLine::me("Worth it"),
];

pub const TRAVEL_FLOW: &[FlowLine] = &[
    FlowLine::other(0, "Flights to Lisbon are 40% off this week 👀"),
    FlowLine::me("Don't do this to me, I just got back from holidays"),
    FlowLine::other(1, "June dates? I can move things"),
    FlowLine::other(2, "I have a spreadsheet ready from last time"),
    FlowLine::me("Of course you do 😂"),
    FlowLine::media(P3, MessageType::Link, "Check this itinerary guide"),
    FlowLine::other(0, "Day 2 of that guide is exactly what I wanted").as_reply(),
    FlowLine::other(1, "Okay votes: second week of June?"),
    FlowLine::me("...fine. I'm in. Again"),
    FlowLine::other(2, "Spreadsheet shared ✈️"),
];

pub const CREATIVE_FLOW: &[FlowLine] = &[
    FlowLine::other(0, "Theme for this month's challenge: 'reflections'"),
    FlowLine::me("Ooh that's a good one"),
    FlowLine::other(1, "Puddle season is finally paying off"),
    FlowLine::media(P2, MessageType::Image, "Early attempt from this morning"),
    FlowLine::other(0, "The symmetry on that is unreal").as_reply(),
    FlowLine::me("Okay the bar is set high already"),
    FlowLine::other(2, "Deadline the 28th as usual?"),
    FlowLine::other(0, "Yep, then critique night at the studio"),
    FlowLine::other(1, "Snacks rota says it's @me's turn"),
    FlowLine::me("The real creative challenge. Accepted"),
];

pub const GENERIC_GROUP_FLOW: &[FlowLine] = &[
    FlowLine::other(0, "Morning all ☀️"),
    FlowLine::other(1, "Morning! Anyone seen the forecast for Saturday?"),
    FlowLine::me("Sunny until 4, then classic betrayal"),
    FlowLine::other(2, "So we plan for 10-3. Noted"),
    FlowLine::other(0, "Park meetup then? Usual spot"),
    FlowLine::me("I'll bring the big blanket"),
    FlowLine::media(P2, MessageType::Image, "Throwback to the last one"),
    FlowLine::other(1, "A classic day that was").as_reply(),
    FlowLine::other(2, "Let's top it"),
    FlowLine::me("Saturday it is 🙌"),
];

/// Ordered title-matching rules dispatching to a themed script.
pub const GROUP_FLOW_RULES: &[(&[&str], &[FlowLine])] = &[
    (&["best friend"], BEST_FRIENDS_FLOW),
    (&["family"], FAMILY_FLOW),
    (&["work", "office", "project"], WORK_FLOW),
    (&["friend"], FRIENDS_FLOW),
    (&["study", "school", "class", "homework"], STUDY_FLOW),
    (&["game", "gaming"], GAMING_FLOW),
    (&["fit", "gym"], FITNESS_FLOW),
    (&["food", "cook", "recipe", "dinner", "brunch", "soup"], FOOD_FLOW),
    (&["travel", "trip"], TRAVEL_FLOW),
    (&["creative", "art", "design", "photo", "band"], CREATIVE_FLOW),
];

/// Generic scenes cycled by `(conversation_index + running_len) % 10` when a
/// themed script runs short of the target count.
pub const FILLER_SCENES: &[&[FlowLine]] = &[
    &[
        FlowLine::other(0, "Random but does anyone have a ladder I can borrow?"),
        FlowLine::other(1, "What did you break"),
        FlowLine::other(0, "Nothing! Yet"),
        FlowLine::me("I have one, swing by after 6"),
    ],
    &[
        FlowLine::other(1, "This group has been suspiciously quiet today"),
        FlowLine::me("Some of us work, you know"),
        FlowLine::other(2, "Bold claim"),
        FlowLine::other(1, "😂"),
    ],
    &[
        FlowLine::me("Poll: pineapple on pizza"),
        FlowLine::other(0, "Yes and I will not be apologizing"),
        FlowLine::other(2, "Blocked"),
        FlowLine::other(0, "Worth it"),
    ],
    &[
        FlowLine::other(2, "Just walked past our old spot, they renovated it"),
        FlowLine::other(0, "No way, the one with the broken jukebox?"),
        FlowLine::other(2, "Jukebox survived. It's load-bearing apparently"),
        FlowLine::me("As it should be"),
    ],
    &[
        FlowLine::other(1, "Whose turn is it to organize the next thing"),
        FlowLine::me("Not mine, I did the last one"),
        FlowLine::other(0, "The one before last. Nice try"),
        FlowLine::me("...fine, I'll make a poll"),
    ],
    &[
        FlowLine::media(P1, MessageType::Image, "Spotted this and thought of us"),
        FlowLine::me("That's uncanny 😂"),
        FlowLine::other(2, "Saving that"),
    ],
    &[
        FlowLine::other(0, "Reminder to vote on the dates before Friday"),
        FlowLine::other(1, "Done ✅"),
        FlowLine::me("Done"),
        FlowLine::other(2, "Doing it now, stop looking at me"),
    ],
    &[
        FlowLine::me("Today I learned our group chat is 2 years old"),
        FlowLine::other(1, "Happy birthday to this beautiful mess"),
        FlowLine::other(0, "🎂"),
        FlowLine::media(P2, MessageType::Sticker, "celebration"),
    ],
    &[
        FlowLine::other(2, "Can someone resend the address from earlier"),
        FlowLine::other(0, "Scroll up lol"),
        FlowLine::other(2, "I did. It's a wall of memes"),
        FlowLine::me("As intended. One sec, resending"),
    ],
    &[
        FlowLine::other(1, "Big announcement coming tomorrow 👀"),
        FlowLine::me("You can't keep doing this to us"),
        FlowLine::other(0, "It's the third 'big announcement' this month"),
        FlowLine::other(1, "This one is actually big"),
        FlowLine::me("That's what you said last time 😤"),
    ],
];

/// Topic rows for the contextual type-variety path: (title keywords,
/// short variants, long variants). First match on the lowercased title wins;
/// unmatched titles use [`DEFAULT_CONTEXT_TOPIC`].
pub const CONTEXT_TOPICS: &[(&[&str], &[&str], &[&str])] = &[
    (
        &["fit", "gym", "run", "marathon"],
        &["Great session today 💪", "Who's in tomorrow?", "Rest day. Earned it"],
        &[
            "New personal best on the deadlift today, slow progress but it's progress",
            "Signed us up for the charity run in October, training plan incoming",
        ],
    ),
    (
        &["work", "office", "project"],
        &["Standup in 5", "Shipped it ✅", "Who owns the follow-up?"],
        &[
            "The client loved the proposal, kickoff is penciled in for the 12th",
            "Retro notes are in the shared doc, please add your items before Friday",
        ],
    ),
    (
        &["study", "school", "class", "exam", "college"],
        &["Notes uploaded", "Quiz tomorrow 😬", "Library at 4?"],
        &[
            "Compiled all the past papers into one folder, link pinned at the top",
            "Office hours moved to Wednesday, updated the calendar for everyone",
        ],
    ),
    (
        &["food", "cook", "dinner", "brunch", "recipe", "soup"],
        &["New recipe tonight 🍳", "Reservations at 8", "Leftovers claimed"],
        &[
            "Tried the slow-cooker version and honestly it beats the original",
            "Found a market stall that sells the good saffron, stocking up for us all",
        ],
    ),
    (
        &["family"],
        &["Call grandma today ❤️", "Sunday lunch as usual?", "Photos uploaded"],
        &[
            "Uploaded all the photos from the weekend to the shared album",
            "Dad fixed the fence, against medical advice, classic dad",
        ],
    ),
    (
        &["game", "gaming", "poker", "trivia", "quiz"],
        &["Queue up 🎮", "GG everyone", "New patch notes 👀"],
        &[
            "The new ranked season starts Tuesday, let's get placements done early",
            "Tournament bracket is out and we got a rough first round draw",
        ],
    ),
    (
        &["friend", "night", "club", "squad", "crew"],
        &["Miss you all!", "This weekend? 👀", "Same place as always"],
        &[
            "Calendar poll is up for the reunion, three date options, go vote",
            "Found the photos from two summers ago and they are incredible",
        ],
    ),
    (
        &["travel", "trip", "beach", "ski", "hike"],
        &["Passport renewed ✈️", "Packing list shared", "Window seat claimed"],
        &[
            "Prices drop if we book before the 15th, who is ready to commit?",
            "Mapped a route that fits everything in without the 5am starts",
        ],
    ),
];

/// (short variants, long variants) for titles no topic row matches.
pub const DEFAULT_CONTEXT_TOPIC: (&[&str], &[&str]) = (
    &["Anyone around?", "Thoughts?", "Sounds good to me", "On my way"],
    &[
        "Let's lock the plan in the next few days so everyone can organize",
        "I'll put together a summary tonight and share it here",
    ],
);
