//! Scripted two-party dialogues for direct chats, plus the topic blocks,
//! transitions, closings, and fillers used to stretch a flow to its target
//! length. Selection is always modulo arithmetic on the conversation index.

use crate::models::MessageType;

use super::line::{FlowLine, Speaker};

const ME: Speaker = Speaker::Me;
const PEER: Speaker = Speaker::Other(0);

/// Seed dialogues, selected by `conversation_index % DIRECT_FLOWS.len()`.
pub const DIRECT_FLOWS: &[&[FlowLine]] = &[
    // 0: catching up
    &[
        FlowLine::peer("Hey! Long time no see 😊"),
        FlowLine::me("I know right! How have you been?"),
        FlowLine::peer("Pretty good actually. Started a new job last month"),
        FlowLine::me("No way, congrats! Where at?").as_reply(),
        FlowLine::peer("A small design studio downtown. Loving it so far"),
        FlowLine::media(PEER, MessageType::Image, "This is the view from my desk"),
        FlowLine::me("Okay that's unfair 😅"),
        FlowLine::peer("Come visit sometime, coffee's on me"),
        FlowLine::me("Deal. Next week?"),
        FlowLine::peer("Works for me!"),
    ],
    // 1: weekend plans
    &[
        FlowLine::me("Any plans for the weekend?"),
        FlowLine::peer("Thinking about that new hiking trail. You in?"),
        FlowLine::me("Depends, how early are we talking"),
        FlowLine::peer("7am at the trailhead 😁"),
        FlowLine::me("That's basically still night"),
        FlowLine::peer("Sunrise from the ridge though. Worth it"),
        FlowLine::media(PEER, MessageType::Image, "Last time I went up"),
        FlowLine::me("...fine. But you're bringing the coffee").as_reply(),
        FlowLine::peer("Always do"),
    ],
    // 2: lost keys saga
    &[
        FlowLine::peer("You will not believe my morning"),
        FlowLine::me("What happened"),
        FlowLine::peer("Locked myself out. Keys on the kitchen counter, plain sight"),
        FlowLine::me("Not again 😂"),
        FlowLine::peer("The locksmith knows me by name now. That's a milestone"),
        FlowLine::me("A loyalty card situation"),
        FlowLine::peer("Honestly I should ask"),
        FlowLine::media(PEER, MessageType::Sticker, "facepalm"),
    ],
    // 3: dinner planning
    &[
        FlowLine::me("Dinner tonight? I'm craving something spicy"),
        FlowLine::peer("The Thai place on 5th?"),
        FlowLine::me("The one with the insane drunken noodles? Yes"),
        FlowLine::peer("Booking for 7:30"),
        FlowLine::me("Perfect. I'll grab us a spot at the bar if I'm early"),
        FlowLine::peer("You're always early, that's why I keep you around"),
        FlowLine::me("Rude but accurate"),
        FlowLine::media(PEER, MessageType::Gif, "excited dancing"),
    ],
    // 4: job interview nerves
    &[
        FlowLine::peer("Interview in an hour. Send help"),
        FlowLine::me("You've got this. You prepped all week"),
        FlowLine::peer("What if they ask about the gap year"),
        FlowLine::me("Then you tell them the truth, it's a good story").as_reply(),
        FlowLine::peer("Okay. Okay okay okay"),
        FlowLine::me("Breathe. Text me right after"),
        FlowLine::peer("Will do 🤞"),
        FlowLine::me("Good luck!!"),
    ],
    // 5: borrowed book
    &[
        FlowLine::me("Do you still have my copy of The Overstory?"),
        FlowLine::peer("...define 'have'"),
        FlowLine::me("What did you do to my book"),
        FlowLine::peer("Nothing! It's just currently at my parents' place"),
        FlowLine::me("That's three hours away"),
        FlowLine::peer("I'll get it next visit, promise. It was too good to stop reading"),
        FlowLine::me("Fine, that's the only acceptable excuse"),
    ],
    // 6: movie debrief
    &[
        FlowLine::peer("Okay I finally watched it"),
        FlowLine::me("AND??"),
        FlowLine::peer("The ending?? I need to talk about the ending"),
        FlowLine::me("I TOLD you. Nobody believes me until they see it"),
        FlowLine::peer("I was not emotionally prepared"),
        FlowLine::me("Nobody is. Director's cut is even worse"),
        FlowLine::peer("There's a director's cut?!").as_reply(),
        FlowLine::me("Saturday. My place. Bring tissues"),
        FlowLine::peer("Deal"),
    ],
    // 7: apartment hunt
    &[
        FlowLine::peer("Saw two apartments today. One has a balcony, one has working heating"),
        FlowLine::me("In this city you don't get both, that's the law"),
        FlowLine::peer("The balcony one had 'character' which means slanted floors"),
        FlowLine::me("Marbles roll uphill kind of character?"),
        FlowLine::peer("I dropped a pen and it's in another postcode now"),
        FlowLine::me("😂😂 take the heating"),
        FlowLine::peer("Yeah. Winter me will thank present me"),
        FlowLine::media(PEER, MessageType::Image, "The infamous floor"),
    ],
    // 8: gym accountability
    &[
        FlowLine::me("6pm session still on?"),
        FlowLine::peer("Can we do 7? Meeting's running over"),
        FlowLine::me("7 works. Legs today, no skipping"),
        FlowLine::peer("I was going to suggest cardio"),
        FlowLine::me("You suggested cardio last leg day too"),
        FlowLine::peer("And I stand by it"),
        FlowLine::me("7pm. Squat rack. Be there"),
        FlowLine::peer("Ugh. Fine 💪"),
    ],
    // 9: recipe exchange
    &[
        FlowLine::peer("That curry you made last time, I need the recipe"),
        FlowLine::me("It's my grandmother's, so you get the almost-complete version"),
        FlowLine::peer("There's a secret ingredient isn't there"),
        FlowLine::me("There is and I'm taking it to the grave"),
        FlowLine::media(ME, MessageType::File, "Here's the rest though"),
        FlowLine::peer("I will reverse-engineer it. This is a threat"),
        FlowLine::me("Many have tried 😌"),
    ],
    // 10: flight delay
    &[
        FlowLine::peer("Flight's delayed 3 hours. Airport purgatory"),
        FlowLine::me("Oof. Lounge access?"),
        FlowLine::peer("No. I'm at gate B14 watching a pigeon that lives here now"),
        FlowLine::me("The pigeon has seen things"),
        FlowLine::peer("The pigeon has status on three airlines"),
        FlowLine::me("😂 want me to still pick you up?"),
        FlowLine::peer("If you don't mind the new ETA, you're a hero"),
        FlowLine::me("Send it when you board").as_reply(),
        FlowLine::peer("Will do 🙏"),
    ],
    // 11: plant hospital
    &[
        FlowLine::me("My monstera has one (1) yellow leaf. Panicking"),
        FlowLine::peer("Send a pic, I'll diagnose"),
        FlowLine::media(ME, MessageType::Image, "The patient"),
        FlowLine::peer("Overwatering. Classic. Step away from the watering can"),
        FlowLine::me("But it looked thirsty"),
        FlowLine::peer("They always look thirsty. It's manipulation"),
        FlowLine::me("Houseplants are toxic relationships, got it"),
        FlowLine::peer("Now you're learning"),
    ],
    // 12: concert tickets
    &[
        FlowLine::peer("TICKETS ARE LIVE"),
        FlowLine::me("ON IT"),
        FlowLine::peer("Queue position 4,832 😭"),
        FlowLine::me("2,014 here. Hold the line"),
        FlowLine::peer("If you get through, two tickets. TWO"),
        FlowLine::me("I know, I know"),
        FlowLine::me("GOT THEM. Row 12!!"),
        FlowLine::peer("I owe you my life").as_reply(),
        FlowLine::media(PEER, MessageType::Gif, "crying with joy"),
    ],
    // 13: language learning
    &[
        FlowLine::me("Day 200 streak on the owl app 🦉"),
        FlowLine::peer("Okay but can you actually order food in Spanish yet"),
        FlowLine::me("I can say 'the turtle eats bread' with perfect grammar"),
        FlowLine::peer("Extremely useful in restaurants"),
        FlowLine::me("The turtle is a loyal companion, I won't hear slander"),
        FlowLine::peer("Test: how do you ask for the bill"),
        FlowLine::me("...la tortuga come pan"),
        FlowLine::peer("😂😂😂"),
    ],
    // 14: voice note era
    &[
        FlowLine::media(PEER, MessageType::VoiceNote, "Voice message"),
        FlowLine::me("A 4-minute voice note?? Who raised you"),
        FlowLine::peer("It's efficient!"),
        FlowLine::me("Summarize it in text like a civilized person"),
        FlowLine::peer("Fine: party Saturday, bring the good snacks, don't tell Marco yet"),
        FlowLine::me("See, 10 seconds of reading"),
        FlowLine::peer("The voice note had AMBIENCE"),
        FlowLine::me("It had you chewing, is what it had"),
    ],
];

/// Topic blocks the continuation step mixes together. Chosen by offsets from
/// the conversation index, 2-3 blocks per continuation.
pub const TOPIC_BLOCKS: &[&[FlowLine]] = &[
    // weather
    &[
        FlowLine::peer("Also is this weather wild or what"),
        FlowLine::me("I've worn a coat and sunglasses in the same hour"),
        FlowLine::peer("Four seasons per day, no refunds"),
        FlowLine::me("My weather app just shows a shrug emoji at this point"),
        FlowLine::peer("Accurate forecasting honestly"),
        FlowLine::me("Most reliable source I have"),
    ],
    // series binge
    &[
        FlowLine::me("Started that series everyone keeps recommending"),
        FlowLine::peer("Which one? There are forty"),
        FlowLine::me("The one with the heist and the timeline shenanigans"),
        FlowLine::peer("Oh you're not sleeping this week then"),
        FlowLine::me("Episode 3 and I've already cancelled two plans"),
        FlowLine::peer("It gets worse. In a good way"),
    ],
    // cooking experiments
    &[
        FlowLine::peer("Attempted sourdough again btw"),
        FlowLine::me("Did it rise this time?"),
        FlowLine::peer("It rose. Then it deflated. Emotionally and physically"),
        FlowLine::me("Bread can sense fear"),
        FlowLine::peer("The starter is named Brenda and Brenda is moody"),
        FlowLine::me("Brenda demands respect"),
    ],
    // work gripes
    &[
        FlowLine::me("Three meetings today that could've been emails"),
        FlowLine::peer("One of mine was a meeting about scheduling a meeting"),
        FlowLine::me("That's recursion. That's computer science"),
        FlowLine::peer("I'm putting it on my CV"),
        FlowLine::me("'Expert in meta-meetings'"),
        FlowLine::peer("Hired instantly"),
    ],
    // fitness check-in
    &[
        FlowLine::peer("Did my first 5k without stopping!!"),
        FlowLine::me("LET'S GO 🎉 what was the time?"),
        FlowLine::peer("We don't discuss the time. We celebrate the distance"),
        FlowLine::me("Fair. Distance respected"),
        FlowLine::peer("Next goal 10k by summer"),
        FlowLine::me("I'll be at the finish line with snacks"),
    ],
    // pet chaos
    &[
        FlowLine::me("The cat learned to open the snack drawer"),
        FlowLine::peer("It was only a matter of time"),
        FlowLine::me("I installed a child lock. She watched me do it. Judging"),
        FlowLine::peer("She'll have it solved by Thursday"),
        FlowLine::me("She had it solved by dinner"),
        FlowLine::peer("You live in her house, you just pay the rent"),
    ],
    // tech troubles
    &[
        FlowLine::peer("My laptop takes 11 minutes to boot now"),
        FlowLine::me("11?? That's a vintage wine, not a computer"),
        FlowLine::peer("It makes a sound like a tiny jet when I open a browser"),
        FlowLine::me("Back it up. Today. I'm serious"),
        FlowLine::peer("Yeah yeah, this weekend"),
        FlowLine::me("That's what you said last month 😤"),
    ],
    // weekend market
    &[
        FlowLine::me("Farmers market Saturday? The cheese guy is back"),
        FlowLine::peer("THE cheese guy? With the aged gouda?"),
        FlowLine::me("The very same"),
        FlowLine::peer("I'm setting an alarm. This is priority"),
        FlowLine::me("9am, before the line forms"),
        FlowLine::peer("For gouda? I'd queue at dawn"),
    ],
];

/// Short bridges inserted before each topic block.
pub const TRANSITIONS: &[FlowLine] = &[
    FlowLine::me("Oh btw, totally different topic"),
    FlowLine::peer("Unrelated, but I have to tell you something"),
    FlowLine::me("Wait, before I forget"),
    FlowLine::peer("Changing the subject entirely"),
    FlowLine::me("Also!!"),
    FlowLine::peer("Oh and one more thing"),
];

/// Fixed tail appended after the mixed topic blocks.
pub const CONTINUATION_CLOSER: &[FlowLine] = &[
    FlowLine::me("Anyway, I should get back to it"),
    FlowLine::peer("Same. Talk later?"),
    FlowLine::me("Always"),
];

/// Closing exchanges, selected by `conversation_index % 5`.
pub const CLOSING_SCRIPTS: &[&[FlowLine]] = &[
    &[
        FlowLine::peer("Right, I'm off. Early start tomorrow"),
        FlowLine::me("Sleep well! Say hi to everyone"),
        FlowLine::peer("Will do. Night!"),
        FlowLine::me("Night 🌙"),
    ],
    &[
        FlowLine::me("Okay my food's here, gotta go"),
        FlowLine::peer("Enjoy! We'll finish this debate later"),
        FlowLine::me("There's nothing to finish, I'm right"),
        FlowLine::peer("😤 later!"),
    ],
    &[
        FlowLine::peer("Battery at 2%, if I vanish it's not personal"),
        FlowLine::me("Classic. Charge your phone for once"),
        FlowLine::peer("Never. Keeps life exciti"),
        FlowLine::me("😂 and there they go"),
    ],
    &[
        FlowLine::me("Heading into the cinema, going dark for two hours"),
        FlowLine::peer("Enjoy! No spoilers when you're out"),
        FlowLine::me("No promises"),
        FlowLine::peer("MONSTER"),
    ],
    &[
        FlowLine::peer("Okay for real this time, bye"),
        FlowLine::me("You said that 20 minutes ago"),
        FlowLine::peer("This time I mean it"),
        FlowLine::me("Sure you do. Bye! 👋"),
    ],
];

/// Last-resort filler when every scripted pool is exhausted. Speaker and
/// message type are decided by the generator's slot index.
pub const GENERIC_FILLERS: &[&str] = &[
    "Haha exactly",
    "Wait really?",
    "That's what I said!",
    "No way 😂",
    "Okay fair point",
    "I'll send it over in a bit",
    "Remind me later?",
    "Can't stop thinking about this",
    "We should do this more often",
    "Honestly same",
    "Let me check and get back to you",
    "Classic",
];
