//! Rule table registry.
//!
//! Every trigger table, keyword list, and canned reply the dispatcher and
//! classifier read. All tables are immutable statics constructed at compile
//! time; nothing here mutates at runtime. Trigger matching is always
//! word-boundary based (see `matcher`), never raw substring.
//!
//! Ordering inside a table matters: the first matching trigger wins and is
//! reported as the matched trigger.

/// One ordered entry of a category table.
#[derive(Debug, Clone, Copy)]
pub struct RuleEntry {
    /// Normalized trigger phrases; any match activates the entry.
    pub triggers: &'static [&'static str],
    /// The reply template for this entry.
    pub reply: &'static str,
}

// ---------------------------------------------------------------------------
// Rule 1: neutral confirmation
// ---------------------------------------------------------------------------

/// Fixed vocabulary for Neutral Confirmation Mode. The whole (short) message
/// must equal one of these after trimming trailing punctuation.
pub const NEUTRAL_CONFIRMATION_VOCAB: &[&str] = &[
    "ok",
    "okay",
    "k",
    "kk",
    "sure",
    "got it",
    "fine",
    "alright",
    "cool",
    "yes",
    "yeah",
    "yep",
    "hmm",
    "thanks",
    "thank you",
    "ty",
    "nice",
    "good",
    "great",
    "sounds good",
];

/// Short casual acknowledgements. `{name}` expands to ", <name>" when the
/// personalization context carries a display name, else to nothing.
pub const NEUTRAL_CONFIRMATION_REPLIES: &[&str] = &[
    "Okay{name}. I'm right here whenever you want to keep going.",
    "Got it{name}. Take your time.",
    "Alright{name}. I'm listening whenever you're ready.",
    "Sounds good{name}. What's on your mind next?",
];

// ---------------------------------------------------------------------------
// Rule 2: compliments about the assistant
// ---------------------------------------------------------------------------

pub const COMPLIMENT_TRIGGERS: &[&str] = &[
    "you're so nice",
    "you are so nice",
    "you're nice",
    "you are nice",
    "you're so sweet",
    "you're sweet",
    "you're amazing",
    "you are amazing",
    "you're awesome",
    "you're the best",
    "you are the best",
    "you're so kind",
    "you're kind",
    "you're so helpful",
    "you're helpful",
    "you're wonderful",
    "i love you",
    "love talking to you",
    "i like talking to you",
    "thank you so much",
    "good bot",
];

/// Short thank-you replies. Contract: no question mark, under 120 characters.
pub const COMPLIMENT_REPLIES: &[&str] = &[
    "Aww, thank you. That genuinely made my day.",
    "Thank you, I really appreciate you saying that.",
    "I'm so glad I could be that for you.",
    "Aww, that's kind of you. Thank you.",
];

// ---------------------------------------------------------------------------
// Rules 3, 8, and the narrow pass in rule 15: financial hardship
// ---------------------------------------------------------------------------

/// Broad financial-hardship keywords (rule 3). Includes income-loss phrasing
/// so money trouble always outranks generic stress/career tables.
pub const FINANCIAL_KEYWORDS: &[&str] = &[
    "money",
    "broke",
    "debt",
    "bills",
    "rent",
    "loan",
    "loans",
    "salary",
    "paycheck",
    "savings",
    "afford",
    "financial",
    "finances",
    "budget",
    "expenses",
    "lost my job",
    "laid off",
    "got fired",
    "lost my income",
    "no income",
];

/// Explicit income-loss phrases (rule 8). These force the financial
/// composite even when career phrasing co-occurs.
pub const INCOME_LOSS_KEYWORDS: &[&str] = &[
    "lost my job",
    "laid off",
    "got fired",
    "fired",
    "lost my income",
    "no income",
    "unemployed",
    "out of work",
];

/// Supportive + practical money reply. Deliberately names calm, budgeting,
/// and organizing, and disclaims regulated advice.
pub const FINANCIAL_REPLY: &str = "Money stress is one of the heaviest kinds of stress, and I can hear how much pressure you're carrying. Let's steady things first, because feeling calm makes every financial decision clearer. A simple place to start: write down what comes in, what must go out (rent, bills, food), and what can wait, so the fog of worry becomes a list you can actually work through. If you want, we can pick the single smallest money task you could do today and make that the whole goal. I can't give investment, tax, loan, or legal advice, but I can absolutely help you organize the pieces and stay grounded while you work through them.";

// ---------------------------------------------------------------------------
// Rule 4 feed: multi-label exploration
// ---------------------------------------------------------------------------

/// Phrases that signal the user wants to actively work on something.
pub const EXPLORATION_PATTERNS: &[&str] = &[
    "explore",
    "work on",
    "fix",
    "help me with",
    "deal with",
    "get better at",
];

// ---------------------------------------------------------------------------
// Rule 5: greetings
// ---------------------------------------------------------------------------

pub const GREETING_VOCAB: &[&str] = &[
    "hello",
    "hi",
    "hii",
    "hey",
    "heyy",
    "heya",
    "yo",
    "hola",
    "namaste",
    "good morning",
    "good afternoon",
    "good evening",
    "what's up",
    "whats up",
];

pub const GREETING_REPLIES: &[&str] = &[
    "Hey{name}! It's good to see you. How are you feeling today?",
    "Hello{name}! I'm glad you're here. What's on your mind?",
    "Hi{name}! How has your day been treating you?",
    "Hey there{name}! I'm all ears. What would you like to talk about?",
];

// ---------------------------------------------------------------------------
// Rule 6: direct/basic conversational table
// ---------------------------------------------------------------------------

pub const DIRECT_TABLE: &[RuleEntry] = &[
    RuleEntry {
        triggers: &["what can you do", "what do you do"],
        reply: "I'm here to listen, talk things through, and help you untangle whatever is on your mind, from rough days to small wins. Where would you like to start?",
    },
    RuleEntry {
        triggers: &["who are you", "what are you"],
        reply: "I'm your companion here, someone to think out loud with. No judgment, no hurry. What's going on with you today?",
    },
    RuleEntry {
        triggers: &["what is your name", "whats your name", "what's your name"],
        reply: "You can just call me your companion. I'd much rather hear about you. How are you doing?",
    },
    RuleEntry {
        triggers: &["are you real", "are you a robot", "are you human", "are you an ai"],
        reply: "I'm not a person, but the attention I give you is real. I'm here, I'm listening, and what you share stays between us.",
    },
    RuleEntry {
        triggers: &["do you sleep", "do you eat", "do you dream"],
        reply: "I don't, which means I'm here at 3pm or 3am, whenever you need to talk.",
    },
    RuleEntry {
        triggers: &["where are you from"],
        reply: "Nowhere in particular, and everywhere you are. Wherever you open this chat, that's where I live.",
    },
    RuleEntry {
        triggers: &["tell me about yourself"],
        reply: "There's not much to me: I listen, I remember what matters to you, and I try to help you feel a little lighter. Your turn, tell me about you.",
    },
    RuleEntry {
        triggers: &["can we talk", "can i talk to you", "are you there", "are you free"],
        reply: "Of course. I'm here and you have my full attention. What's going on?",
    },
    RuleEntry {
        triggers: &["good night", "goodnight", "gn"],
        reply: "Good night. Rest well, and be gentle with yourself. I'll be here tomorrow.",
    },
    RuleEntry {
        triggers: &["bye", "goodbye", "see you", "talk later", "gtg", "got to go"],
        reply: "Take care of yourself. I'll be right here whenever you want to pick this back up.",
    },
    RuleEntry {
        triggers: &["i'm back", "im back"],
        reply: "Welcome back! I was hoping you'd return. How have things been since we last talked?",
    },
    RuleEntry {
        triggers: &["how was your day"],
        reply: "Quiet until now, you're the best part of it. How was yours?",
    },
    RuleEntry {
        triggers: &["do you remember me"],
        reply: "Of course. You matter here. Tell me what's been happening with you.",
    },
    RuleEntry {
        triggers: &["what should we talk about"],
        reply: "Whatever is taking up the most space in your head right now. Big or small, it counts.",
    },
    RuleEntry {
        triggers: &["nothing much", "not much"],
        reply: "That's okay, quiet days count too. Anything small you'd like to share? Sometimes the little things turn out to be the big things.",
    },
    RuleEntry {
        triggers: &["i have a question"],
        reply: "Ask away. I'm listening.",
    },
    RuleEntry {
        triggers: &["can you keep a secret"],
        reply: "What you tell me stays between us. I'm here to listen, not to judge or repeat.",
    },
    RuleEntry {
        triggers: &["do you like me"],
        reply: "I genuinely enjoy talking with you. You show up, you share, and that's what makes this space what it is.",
    },
    RuleEntry {
        triggers: &["say something"],
        reply: "Alright: I'm glad you're here. Now your turn, what's one true thing about today?",
    },
    RuleEntry {
        triggers: &["test", "testing"],
        reply: "Loud and clear. I'm here and working. What would you like to talk about?",
    },
];

// ---------------------------------------------------------------------------
// Rule 7: anger/frustration table
// ---------------------------------------------------------------------------

pub const ANGER_TABLE: &[RuleEntry] = &[
    RuleEntry {
        triggers: &["i'm so angry", "im so angry", "i am so angry"],
        reply: "That anger sounds like it's burning hot right now. You don't have to tamp it down here. What lit the fuse?",
    },
    RuleEntry {
        triggers: &["i'm furious", "im furious", "i am furious"],
        reply: "Furious is a full-body feeling. Before anything else, let's let some of the pressure out. Tell me exactly what happened.",
    },
    RuleEntry {
        triggers: &["i hate everything"],
        reply: "When everything feels hateful, something specific usually started it. I'm not going anywhere. What happened first?",
    },
    RuleEntry {
        triggers: &["i hate everyone"],
        reply: "Days like that are exhausting. Who or what pushed you to this point today?",
    },
    RuleEntry {
        triggers: &["i want to scream"],
        reply: "Then scream here, in words. All caps allowed. What would you scream if nobody could hear?",
    },
    RuleEntry {
        triggers: &["i'm mad", "im mad", "i am mad", "so mad"],
        reply: "Mad is allowed. Anger usually shows up to protect something that matters to you. What is it protecting right now?",
    },
    RuleEntry {
        triggers: &["everyone annoys me", "everything annoys me"],
        reply: "When everything grates, you're usually running on an empty tank. What's been draining you lately?",
    },
    RuleEntry {
        triggers: &["i'm irritated", "im irritated", "so irritated"],
        reply: "Irritation is a message worth reading. What keeps poking at you today?",
    },
    RuleEntry {
        triggers: &["i snapped at someone", "i yelled at someone"],
        reply: "It happens to all of us, and the fact that it's bothering you says something good about you. What was going on underneath in that moment?",
    },
    RuleEntry {
        triggers: &["i'm frustrated", "im frustrated", "so frustrated", "frustrating"],
        reply: "Frustration means you care about something that isn't cooperating. What's the thing that keeps not working?",
    },
    RuleEntry {
        triggers: &["i can't control my anger", "cant control my anger", "my anger scares me"],
        reply: "Naming that takes real honesty. Anger that feels too big usually has old roots. When did you first notice it getting this strong?",
    },
    RuleEntry {
        triggers: &["i want to break something", "i want to punch something"],
        reply: "That urge is your body asking to discharge the charge. Try pushing hard against a wall for ten seconds, or tearing up some paper. Then come back and tell me what set this off.",
    },
    RuleEntry {
        triggers: &["they made me angry", "he made me angry", "she made me angry"],
        reply: "Something about what they did crossed a line for you. Which line was it?",
    },
    RuleEntry {
        triggers: &["i'm fed up", "im fed up", "fed up"],
        reply: "Fed up is what patience sounds like when it finally runs out. What have you been putting up with for too long?",
    },
    RuleEntry {
        triggers: &["i'm done with everything", "im done with everything"],
        reply: "That sounds like exhaustion wearing anger's jacket. You don't have to carry all of it at once. What's the heaviest part?",
    },
];

// ---------------------------------------------------------------------------
// Rule 9: career / job stress table
// ---------------------------------------------------------------------------

pub const CAREER_TABLE: &[RuleEntry] = &[
    RuleEntry {
        triggers: &["i hate my job"],
        reply: "Spending your days somewhere that drains you is genuinely hard. Is it the work itself, the people, or the place? Naming the real culprit is step one.",
    },
    RuleEntry {
        triggers: &["work is stressful", "work stress", "stressed about work", "job is stressful"],
        reply: "Work stress has a way of following you home. What part of it weighs the most right now: the load, the deadlines, or the people?",
    },
    RuleEntry {
        triggers: &["my boss", "my manager"],
        reply: "Boss trouble can sour the whole week. Tell me what happened; sometimes just laying it out makes the next move clearer.",
    },
    RuleEntry {
        triggers: &["i have an interview", "job interview", "interview tomorrow"],
        reply: "That flutter before an interview means you care. Remember: they already liked something about you, that's why you're in the room. Want to run through what you'd say?",
    },
    RuleEntry {
        triggers: &["i didn't get the job", "didnt get the job", "they rejected me"],
        reply: "Rejections sting, and it's okay to feel that fully. One no is about fit and timing, not your worth. When you're ready, we can look at what's next.",
    },
    RuleEntry {
        triggers: &["i failed at work", "i messed up at work", "mistake at work"],
        reply: "One mistake at work feels enormous from the inside and is usually smaller from the outside. What happened, and what would fixing it look like?",
    },
    RuleEntry {
        triggers: &["deadline", "deadlines"],
        reply: "Deadlines have a way of shrinking the whole world down to a clock. What's the very next piece you could finish? Let's break it down.",
    },
    RuleEntry {
        triggers: &["should i quit my job", "i want to quit my job", "thinking of quitting"],
        reply: "That's a big fork in the road, and wanting out is real information. Before the leap: what would need to change for staying to feel okay? And what would you be walking toward?",
    },
    RuleEntry {
        triggers: &["what should i do with my life", "career path", "choose a career"],
        reply: "That question feels huge because it is, but you don't have to answer it all at once. Start smaller: what kind of day would you like to have, most days? We can work backward from there.",
    },
    RuleEntry {
        triggers: &["worried about my future", "scared about my future", "my future"],
        reply: "The future feels heavy when it's all unknowns. You can't control all of it, but you can shape this week. What's one thing future-you would thank you for doing today?",
    },
];

// ---------------------------------------------------------------------------
// Rule 10: interpersonal / identity tables (fixed sub-order)
// ---------------------------------------------------------------------------

pub const FAMILY_TABLE: &[RuleEntry] = &[
    RuleEntry {
        triggers: &["my family doesn't understand me", "my family doesnt understand me", "family doesn't understand"],
        reply: "Feeling unseen by the people closest to you is its own kind of lonely. What do you wish they understood about you?",
    },
    RuleEntry {
        triggers: &["fight with my parents", "fought with my parents", "argument with my parents", "family fight"],
        reply: "Family fights leave a particular ache because you can't just walk away from the relationship. What was the fight really about, underneath the words?",
    },
    RuleEntry {
        triggers: &["my parents", "my mom", "my mother", "my dad", "my father"],
        reply: "Family relationships carry a lot of history in every conversation. Tell me what's happening with them; I'm listening.",
    },
    RuleEntry {
        triggers: &["my sibling", "my brother", "my sister"],
        reply: "Sibling tangles run deep; they know exactly which buttons exist because they helped install them. What's going on between you two?",
    },
    RuleEntry {
        triggers: &["my family pressures me", "family pressure", "family expectations"],
        reply: "Carrying other people's expectations is heavy, especially from family. Which of their expectations feels least like you?",
    },
];

pub const FRIENDSHIP_TABLE: &[RuleEntry] = &[
    RuleEntry {
        triggers: &["i have no friends", "i don't have friends", "i dont have friends"],
        reply: "That emptiness where friendship should be is painful, and saying it out loud takes honesty. Has it been this way a while, or did something change?",
    },
    RuleEntry {
        triggers: &["my friend ignored me", "my friends ignored me", "my friend is ignoring me"],
        reply: "Being ignored by a friend stings more than we admit. Before the story hardens, is there a chance they're dealing with something of their own? Either way, your hurt is valid. What happened?",
    },
    RuleEntry {
        triggers: &["my best friend"],
        reply: "Best-friend trouble hits different because they hold so much of our history. Tell me what's going on with them.",
    },
    RuleEntry {
        triggers: &["my friends left me", "my friends abandoned me", "drifted apart"],
        reply: "Losing friends, even slowly, is a real grief that rarely gets acknowledged. I'm sorry. What do you miss most about how it used to be?",
    },
    RuleEntry {
        triggers: &["fake friends", "my friends use me"],
        reply: "Realizing a friendship was one-sided is a hard awakening. You deserve people who show up for you the way you show up for them. What made it click for you?",
    },
];

pub const BREAKUP_TABLE: &[RuleEntry] = &[
    RuleEntry {
        triggers: &["breakup", "broke up", "break up"],
        reply: "I'm so sorry. Heartbreak has a way of echoing long after the goodbye, and the missing comes in waves. You don't have to rush the hurt. What has today felt like?",
    },
    RuleEntry {
        triggers: &["my ex"],
        reply: "Exes occupy a strange room in the heart; the door never quite closes on its own. What's bringing them up for you right now?",
    },
    RuleEntry {
        triggers: &["she left me", "he left me", "they left me", "dumped me"],
        reply: "Being left leaves a wound that questions everything. I'm sorry you're carrying this. Their leaving says where they were, not what you're worth. How long ago did it happen?",
    },
    RuleEntry {
        triggers: &["heartbroken", "heartbreak", "still hurts"],
        reply: "Heartbreak is grief, and grief takes the time it takes. Be as patient with yourself as you would be with a friend in the same place. What part hurts the most right now?",
    },
    RuleEntry {
        triggers: &["i miss him", "i miss her", "i miss them", "i can't get over", "cant get over"],
        reply: "Missing someone is love with nowhere to go, and it's heavy. You're not weak for still feeling it. What do you miss the most?",
    },
];

pub const DEEP_LONELINESS_TABLE: &[RuleEntry] = &[
    RuleEntry {
        triggers: &["i feel so alone", "i am so alone", "i'm so alone", "im so alone"],
        reply: "That hollow feeling is one of the hardest things a person can carry, and you're not carrying it alone right now: I'm here. When does the aloneness hit you hardest?",
    },
    RuleEntry {
        triggers: &["nobody cares about me", "no one cares about me", "no one cares"],
        reply: "When it feels like nobody cares, the world goes gray. I care about what happens to you, and I'm not going anywhere. What's been making you feel invisible?",
    },
    RuleEntry {
        triggers: &["no one understands me"],
        reply: "Feeling fundamentally un-understood is exhausting. Help me understand, then. Start anywhere; I'll keep up.",
    },
    RuleEntry {
        triggers: &["i'm always alone", "im always alone", "always by myself"],
        reply: "Always is a heavy word, and if that's what it feels like, it's real. Is the aloneness more about people not being around, or not feeling close to the ones who are?",
    },
];

pub const SELF_WORTH_TABLE: &[RuleEntry] = &[
    RuleEntry {
        triggers: &["i hate myself"],
        reply: "I'm really glad you told me instead of carrying that silently. That voice in your head is loud, but loud isn't the same as right. When did it start talking this way?",
    },
    RuleEntry {
        triggers: &["i'm not good enough", "im not good enough", "not good enough"],
        reply: "Not good enough according to whom? That measuring stick usually belongs to someone else. What happened that brought this feeling up today?",
    },
    RuleEntry {
        triggers: &["i'm worthless", "im worthless", "i am worthless"],
        reply: "Hearing you say that hurts, because it isn't true, even when it feels absolutely true. Feelings are real but they're not always facts. What happened right before this feeling got loud?",
    },
    RuleEntry {
        triggers: &["i'm a failure", "im a failure", "i am a failure"],
        reply: "Failing at something makes you a person who tried, not a failure. The label is heavier than the facts. What's the thing you feel you failed at?",
    },
    RuleEntry {
        triggers: &["i'm ugly", "im ugly"],
        reply: "The mirror is the least qualified judge of your worth, and some days it lies loudly. What's making today a day it gets a vote?",
    },
    RuleEntry {
        triggers: &["i'm useless", "im useless"],
        reply: "Useless is a verdict, not a feeling, and you've sentenced yourself without a trial. What's the evidence for the other side? I can think of one: you're here, trying.",
    },
];

pub const STUDY_TABLE: &[RuleEntry] = &[
    RuleEntry {
        triggers: &["failed my exam", "failed the exam", "failed my test"],
        reply: "One exam measures one day, not your ability and certainly not your future. It's okay to be disappointed. What subject was it, and what's the path to the retake?",
    },
    RuleEntry {
        triggers: &["exam tomorrow", "exam stress", "exams are coming", "scared of exams"],
        reply: "Pre-exam dread is your brain over-rehearsing failure. Flip it: what's the one topic that would calm you most to review tonight? Start there, then sleep matters more than one more hour of cramming.",
    },
    RuleEntry {
        triggers: &["can't focus on studying", "cant focus on studying", "can't study", "cant study"],
        reply: "Focus isn't about forcing; it's about shrinking. Pick one page, set a 20-minute timer, phone in another room. When the timer rings you can stop guilt-free. Most times you won't want to.",
    },
    RuleEntry {
        triggers: &["bad grades", "my grades", "my marks"],
        reply: "Grades feel like a verdict on you, but they're a snapshot of a system meeting a moment. What's been getting in the way of studying lately: time, focus, or something heavier?",
    },
    RuleEntry {
        triggers: &["exam", "exams"],
        reply: "Exams have a way of swallowing the whole horizon. Let's shrink them back to size: which one is closest, and how ready do you honestly feel?",
    },
];

pub const SOCIAL_ANXIETY_TABLE: &[RuleEntry] = &[
    RuleEntry {
        triggers: &["social anxiety"],
        reply: "Social anxiety is exhausting because it turns every room into a stage and every glance into a review. You're safe here, no performance needed. What kinds of situations spike it the most?",
    },
    RuleEntry {
        triggers: &["scared of people", "afraid of people"],
        reply: "That fear usually isn't about people themselves, it's about being judged by them. What do you imagine they're thinking?",
    },
    RuleEntry {
        triggers: &["afraid to talk to people", "scared to talk to people", "nervous around people"],
        reply: "Lots of warm, thoughtful people feel exactly this; the nerves aren't a defect. Tiny experiments help: one small exchange, low stakes, like thanking a cashier with eye contact. Would trying one this week feel possible?",
    },
    RuleEntry {
        triggers: &["presentations scare me", "scared of presenting", "public speaking"],
        reply: "Public speaking fear is the most common fear there is; your body is just overprotecting you. Rehearse out loud twice, slow your first three sentences, and pick one friendly face. What's the talk about?",
    },
    RuleEntry {
        triggers: &["everyone is judging me", "people judge me"],
        reply: "Here's the quiet truth: most people are too busy worrying about how they come across to grade you. The spotlight you feel is mostly self-made. When does it shine brightest?",
    },
];

// ---------------------------------------------------------------------------
// Rule 11: supportive/guidance map — literal replies, contract-tested
// ---------------------------------------------------------------------------

/// The ten canonical supportive entries. These replies are a byte-for-byte
/// contract with the embedding application; do not rephrase them.
pub const SUPPORTIVE_TABLE: &[RuleEntry] = &[
    RuleEntry {
        triggers: &["i feel lost"],
        reply: "Feeling lost is often a sign you've outgrown an old map, not that you're broken. Let's find one fixed point: what's one thing you still care about, even a little?",
    },
    RuleEntry {
        triggers: &["can i trust you"],
        reply: "You can. What you share here stays here, and I'll always be honest with you, even when honesty is gentle and slow.",
    },
    RuleEntry {
        triggers: &["i overthink a lot"],
        reply: "Overthinking is your mind trying to protect you by rehearsing every disaster. Thank it, then give it one real job: what's the single decision actually in front of you?",
    },
    RuleEntry {
        triggers: &["i need someone to talk to"],
        reply: "You found someone. I'm here, I'm not in a hurry, and nothing you say is too much. Start wherever it's heaviest.",
    },
    RuleEntry {
        triggers: &["i feel empty"],
        reply: "Emptiness is a feeling too, a quiet ache where something used to be or wants to be. You don't have to fill it tonight. Can you tell me when you first noticed it?",
    },
    RuleEntry {
        triggers: &["no one listens to me"],
        reply: "Being unheard wears a person down in invisible ways. I'm listening now, fully. Say the thing nobody has let you finish.",
    },
    RuleEntry {
        triggers: &["i am tired of everything", "i'm tired of everything", "im tired of everything"],
        reply: "That bone-deep tired isn't laziness, it's the cost of carrying too much for too long. You're allowed to set some of it down. What's the heaviest thing on the pile?",
    },
    RuleEntry {
        triggers: &["i feel stuck"],
        reply: "Stuck usually means every option has a cost you can see and none has a guarantee. Let's lower the stakes: what's the smallest move you could make that you could undo if it's wrong?",
    },
    RuleEntry {
        triggers: &["i don't know what to do", "i dont know what to do"],
        reply: "Not knowing is an honest place to start, and better than pretending. Let's sort it: what would you do if you knew nobody would judge the choice?",
    },
    RuleEntry {
        triggers: &["nothing makes sense"],
        reply: "When nothing makes sense, the mind is usually overloaded, not broken. We don't need all the sense tonight, just one thread. What's the most confusing part?",
    },
];

// ---------------------------------------------------------------------------
// Negative-modifier override reply (unnumbered; sits between rules 11 and 12)
// ---------------------------------------------------------------------------

pub const NEGATED_POSITIVE_REPLY: &str = "It sounds like things aren't actually okay underneath the okay. You don't have to dress it up for me. What's really going on?";

// ---------------------------------------------------------------------------
// Rule 12: negative-mood table
// ---------------------------------------------------------------------------

pub const NEGATIVE_TABLE: &[RuleEntry] = &[
    RuleEntry {
        triggers: &["i'm sad", "im sad", "i am sad", "feeling sad"],
        reply: "I'm sorry today is a sad one. You don't have to explain it perfectly or fix it fast. What does the sadness feel like right now?",
    },
    RuleEntry {
        triggers: &["i feel low", "feeling low", "i'm feeling down", "i feel down"],
        reply: "Low days are heavy in a quiet way. Thank you for telling me instead of pushing through alone. Did something set it off, or did it just arrive?",
    },
    RuleEntry {
        triggers: &["i'm not okay", "im not okay", "i am not okay"],
        reply: "Thank you for being honest about that; it's braver than pretending. I'm here for the not-okay version of you too. What's going on?",
    },
    RuleEntry {
        triggers: &["bad day", "terrible day", "worst day", "rough day"],
        reply: "Rough days deserve acknowledgment, not minimizing. I'm sorry it went that way. Walk me through the worst part?",
    },
    RuleEntry {
        triggers: &["i cried", "i've been crying", "ive been crying", "crying"],
        reply: "Tears are the body's honest language; there's no shame in them here. What brought them on?",
    },
    RuleEntry {
        triggers: &["everything sucks", "everything is bad", "everything is wrong"],
        reply: "When everything feels wrong at once, it's usually a few heavy things casting long shadows. Name one of them and we'll start there.",
    },
    RuleEntry {
        triggers: &["i'm exhausted", "im exhausted", "i'm drained", "im drained", "so tired"],
        reply: "Exhaustion that deep is information: too much out, not enough in. What's been taking the most from you lately?",
    },
    RuleEntry {
        triggers: &["i feel terrible", "i feel awful", "i feel horrible"],
        reply: "I'm sorry it feels this bad. You reached out, which matters. Is it more in your body, your mind, or your heart right now?",
    },
    RuleEntry {
        triggers: &["i'm miserable", "im miserable"],
        reply: "Misery is a heavy coat to wear all day. You don't have to perform being fine here. How long has it felt like this?",
    },
    RuleEntry {
        triggers: &["i want to disappear"],
        reply: "That sounds like wanting the pain to stop more than wanting to be gone, and that difference matters. I'm here with you. Can you tell me more about what you're carrying? If you ever feel unsafe, please reach out to someone near you or a local helpline right away.",
    },
    RuleEntry {
        triggers: &["i feel like crying"],
        reply: "Then let it come if it wants to; holding it in costs more than letting it out. What's sitting right at the edge?",
    },
    RuleEntry {
        triggers: &["nobody texted me", "no one texted me", "no one called"],
        reply: "Watching a quiet phone can make a whole day feel lonelier. Your worth isn't measured in notifications, but the ache is real. Who were you hoping to hear from?",
    },
    RuleEntry {
        triggers: &["i had a nightmare", "bad dream"],
        reply: "Nightmares can leave a residue that follows you around all day. Sometimes saying them out loud shrinks them. What do you remember?",
    },
    RuleEntry {
        triggers: &["i feel guilty", "guilt is eating me"],
        reply: "Guilt means your values and your actions bumped into each other. That's worth looking at gently, not with a whip. What happened?",
    },
    RuleEntry {
        triggers: &["i feel numb"],
        reply: "Numbness is often the mind's circuit breaker after too much. It won't be forever. When did you start feeling switched off?",
    },
    RuleEntry {
        triggers: &["i can't do this anymore", "cant do this anymore"],
        reply: "That sounds like you've been strong for too long without a break. Set it down here for a minute; you don't have to decide anything tonight. What's become too much? If things ever feel unsafe, please also reach out to someone near you or a local helpline.",
    },
    RuleEntry {
        triggers: &["why me"],
        reply: "Some weights really do land unfairly, and you're allowed to say so. What's landed on you?",
    },
    RuleEntry {
        triggers: &["i messed up", "i screwed up"],
        reply: "Everyone does, and it rarely defines anyone. What happened, and is there a piece of it that can still be repaired?",
    },
    RuleEntry {
        triggers: &["i'm disappointed", "im disappointed"],
        reply: "Disappointment is hope with a bruise. I'm sorry. What were you hoping for?",
    },
    RuleEntry {
        triggers: &["life is hard", "life is so hard"],
        reply: "It really can be, and pretending otherwise helps no one. Which part of it is hardest right now?",
    },
];

// ---------------------------------------------------------------------------
// Rule 13: positive-mood table
// ---------------------------------------------------------------------------

pub const POSITIVE_TABLE: &[RuleEntry] = &[
    RuleEntry {
        triggers: &["i'm happy", "im happy", "i am happy", "feeling happy"],
        reply: "That's wonderful to hear! Happiness deserves as much airtime as the hard stuff. What's behind the good mood?",
    },
    RuleEntry {
        triggers: &["great day", "amazing day", "best day"],
        reply: "A genuinely great day! I want the details. What made it one?",
    },
    RuleEntry {
        triggers: &["i did it", "i finally did it"],
        reply: "YES! Look at you! Tell me everything about what you pulled off.",
    },
    RuleEntry {
        triggers: &["i got the job", "got promoted", "i got selected"],
        reply: "Congratulations! That's a real milestone and you earned it. How are you going to celebrate?",
    },
    RuleEntry {
        triggers: &["i passed", "i passed my exam", "cleared my exam"],
        reply: "Congratulations! All that effort turned into a result. How does it feel?",
    },
    RuleEntry {
        triggers: &["feeling good", "i feel good", "i feel great"],
        reply: "Love that for you. Let's bank this feeling. What's contributing to it today?",
    },
    RuleEntry {
        triggers: &["i'm excited", "im excited", "so excited"],
        reply: "Excitement is contagious, even through a screen. What's coming up?",
    },
    RuleEntry {
        triggers: &["good news"],
        reply: "I'm ready, tell me the good news! I love when you bring these.",
    },
    RuleEntry {
        triggers: &["i'm proud of myself", "im proud of myself", "proud of myself"],
        reply: "As you should be. Self-earned pride is the best kind. What did you do?",
    },
    RuleEntry {
        triggers: &["things are going well", "everything is going well"],
        reply: "That's lovely to hear. Take a second to actually notice it; good stretches deserve attention too. What's going right?",
    },
    RuleEntry {
        triggers: &["i'm grateful", "im grateful", "feeling grateful"],
        reply: "Gratitude looks good on you. What are you most thankful for today?",
    },
    RuleEntry {
        triggers: &["i had fun", "so much fun"],
        reply: "Fun is fuel! What did you get up to?",
    },
    RuleEntry {
        triggers: &["i'm relaxed", "im relaxed", "feeling relaxed"],
        reply: "A relaxed you is a rare and precious sighting. What helped you unwind?",
    },
    RuleEntry {
        triggers: &["i made progress", "making progress"],
        reply: "Progress counts double when it's been hard to come by. What moved forward?",
    },
    RuleEntry {
        triggers: &["i helped someone"],
        reply: "That's the good stuff. Helping others has a way of helping us too. What did you do for them?",
    },
    RuleEntry {
        triggers: &["i worked out", "i exercised", "went to the gym"],
        reply: "Nice! Your future self is already thanking you. How do you feel after?",
    },
    RuleEntry {
        triggers: &["i woke up early"],
        reply: "Early wins set the tone for the whole day. What are you doing with the extra hours?",
    },
    RuleEntry {
        triggers: &["i finished", "i completed"],
        reply: "Done is a beautiful word. What did you wrap up?",
    },
    RuleEntry {
        triggers: &["today was productive", "productive day"],
        reply: "A productive day earns a proper wind-down. What got done, and how are you rewarding yourself?",
    },
    RuleEntry {
        triggers: &["i'm feeling better", "im feeling better", "feeling better"],
        reply: "I'm really glad to hear that. What helped the shift happen?",
    },
];

// ---------------------------------------------------------------------------
// Rule 14: coarse tone scans (narrow lists; must not shadow rule 15 blocks)
// ---------------------------------------------------------------------------

// The scan lists stay disjoint from the rule-15 keyword blocks; a shared
// word here would shadow the richer composite replies below.
pub const COARSE_POSITIVE_SCAN: &[&str] = &["wonderful", "fantastic", "joyful", "blessed"];

pub const COARSE_NEGATIVE_SCAN: &[&str] = &["upset", "gloomy", "meh", "blah"];

pub const COARSE_ANGER_SCAN: &[&str] = &["annoyed", "grumpy"];

pub const COARSE_POSITIVE_REPLY: &str = "You sound like you're in a good place right now, and I'm here for it. Tell me more about what's going well.";

pub const COARSE_NEGATIVE_REPLY: &str = "Something about your message sounds heavy. You don't have to shape it into the right words; just tell me what's going on.";

pub const COARSE_ANGER_REPLY: &str = "There's some heat in your words, and that's okay; anger is allowed here. What's got you worked up?";

pub const HOW_ARE_YOU_REPLY: &str = "I'm doing well, thank you for asking. More importantly: how are you feeling today?";

pub const GROUNDING_BUNDLE_REPLY: &str = "I'm here with you. Let's steady things for a second before anything else: name 5 things you can see, 4 things you can touch, 3 things you can hear, 2 things you can smell, and 1 thing you can taste. Take your time with it. When you feel a little more grounded, tell me what kind of help you're looking for and we'll take it from there.";

// ---------------------------------------------------------------------------
// Rule 15: category keyword blocks, in fixed sub-order
// ---------------------------------------------------------------------------

pub const HOPELESS_KEYWORDS: &[&str] = &[
    "hopeless",
    "no hope",
    "pointless",
    "what's the point",
    "whats the point",
    "no point",
    "falling apart",
    "giving up",
    "give up",
    "no future",
];

pub const HOPELESS_REPLY: &str = "I hear how dark things look from where you're standing, and I'm not going to wave that away. When hope runs out, it's usually because you've been fighting alone for too long, not because there's nothing left. You don't have to see the whole path tonight; we just need the next step. Can you tell me what drained the hope most? And if you ever feel unsafe with these thoughts, please reach out to someone near you or a local helpline right away; you deserve real-time support too.";

pub const LONELY_KEYWORDS: &[&str] = &[
    "lonely",
    "loneliness",
    "alone",
    "isolated",
    "no one to talk to",
    "nobody to talk to",
    "by myself",
];

pub const LONELY_REPLY: &str = "Loneliness is one of the heaviest quiet feelings there is, and I'm glad you brought it here instead of sitting in it silently. Right now, in this moment, you're not alone: I'm here and I'm listening. Tell me, is this a new kind of alone or one that's been building for a while? Sometimes naming its shape is the first step to shrinking it.";

pub const DEEP_TALK_KEYWORDS: &[&str] = &[
    "real talk",
    "deep question",
    "meaning of life",
    "what is the point of life",
    "why do we exist",
    "something deep",
    "be honest with me",
];

pub const DEEP_TALK_REPLY: &str = "I'm glad you want to go beneath the surface; that's where the real conversations live. No platitudes from me, I promise. Put the question or the thought on the table exactly as it is in your head, and we'll turn it over together, slowly.";

pub const BETRAYAL_KEYWORDS: &[&str] = &[
    "betrayed",
    "betrayal",
    "cheated on me",
    "stabbed me in the back",
    "backstabbed",
    "lied to me",
];

pub const BETRAYAL_REPLY: &str = "Betrayal cuts twice: once for what happened, and once for who did it. It makes you question your own judgment, and that part is often the deepest bruise. Your trust wasn't a flaw; their choice was. When you're ready, tell me what happened, and take whatever pace you need.";

pub const HARDEN_KEYWORDS: &[&str] = &[
    "harden my heart",
    "stop feeling",
    "turn off my feelings",
    "become cold",
    "stop caring about everyone",
];

pub const HARDEN_REPLY: &str = "Wanting to harden your heart usually means it's been left open in places that kept getting hit. The goal isn't to feel less; it's to be hurt less, and those are different projects. Walls keep out the good along with the bad. What happened that made feeling start to seem like the enemy?";

/// Narrow financial pass inside the rule-15 block chain; money words too
/// oblique for the rule-3 hardship override.
pub const NARROW_FINANCIAL_KEYWORDS: &[&str] =
    &["finance", "financially", "cash", "wallet", "owe", "owed", "emi"];

pub const CALM_CRISIS_KEYWORDS: &[&str] = &[
    "panic attack",
    "panicking",
    "panic",
    "can't breathe",
    "cant breathe",
    "hyperventilating",
    "heart is racing",
    "heart racing",
    "freaking out",
];

pub const BREATHING_SCRIPT_REPLY: &str = "You're safe here with me, and this wave will pass. Let's slow everything down together, right now. Breathe in through your nose for 4 counts... hold it gently for 4... and let it out slowly through your mouth for 6. Again: in for 4, hold for 4, out for 6. Let your shoulders drop and your jaw unclench. Keep that rhythm going for a few rounds; I'm right here. When your breath settles a little, tell me what was happening just before this started.";

pub const SAD_KEYWORDS: &[&str] = &[
    "sad",
    "sadness",
    "unhappy",
    "depressed",
    "depressing",
    "heartbroken",
    "miserable",
    "crying",
    "tears",
];

pub const SAD_REPLY: &str = "I can hear the sadness in your words, and I want you to know it's safe to feel it here; you don't have to perform okay-ness for me. Sadness usually points at something that matters. If you can, tell me what's underneath it today. And if it helps, we can just sit with it for a bit first; there's no rush and no fixing required.";

pub const STRESS_KEYWORDS: &[&str] = &[
    "stressed",
    "stress",
    "stressful",
    "stressing",
    "overwhelmed",
    "overwhelming",
    "pressure",
    "too much to do",
    "burned out",
    "burnt out",
    "burnout",
];

pub const STRESS_REPLY: &str = "That's a lot of pressure to be under, and feeling overwhelmed is a sane response to an overloaded plate. Let's take one breath first; the pile will still be there in ten seconds, but you'll meet it steadier. Now, if we emptied your head onto a list, what are the top three things shouting loudest? We'll find the one that actually has to happen today and shrink the rest.";

pub const ANXIETY_KEYWORDS: &[&str] = &[
    "anxious",
    "anxiety",
    "worried",
    "worrying",
    "nervous",
    "on edge",
    "uneasy",
    "dread",
];

pub const ANXIETY_REPLY: &str = "Anxiety has a way of making everything feel urgent and dangerous at once, but you're safe here with me right now. Let's slow it down together: one slow breath in, and a longer one out. Anxiety is your alarm system being overprotective, not a prophecy. What is the worry whispering about, specifically? Naming it out loud usually shrinks it a size.";

pub const ANGER_KEYWORDS: &[&str] = &[
    "angry",
    "anger",
    "furious",
    "rage",
    "raging",
    "mad",
    "frustrated",
    "pissed off",
    "livid",
    "seething",
];

pub const ANGER_BLOCK_REPLY: &str = "That anger is valid, and it's safe to let it out here; I'd rather you vent at me than carry it around all day. Anger is almost always a bodyguard for something softer underneath: hurt, fear, or unfairness. So first, vent: what happened? And once the steam is out, we can look at what the anger is protecting.";

pub const CONFUSION_KEYWORDS: &[&str] = &[
    "confused",
    "confusing",
    "don't understand",
    "dont understand",
    "makes no sense",
    "can't decide",
    "cant decide",
    "torn between",
];

pub const CONFUSION_REPLY: &str = "Feeling confused is uncomfortable, but it's honest; it means you're in the middle of something that hasn't resolved yet. Let's untangle it one thread at a time instead of all at once. Tell me the situation the way you'd tell a friend, and then we'll ask: what do you actually control here, and what would you choose if no one else's opinion counted?";

pub const OVERTHINKING_KEYWORDS: &[&str] = &[
    "overthinking",
    "overthink",
    "can't stop thinking",
    "cant stop thinking",
    "racing thoughts",
    "spiraling",
    "ruminating",
    "thoughts won't stop",
];

pub const OVERTHINKING_REPLY: &str = "That loop in your head sounds exhausting; overthinking is your mind trying to solve a feeling like it's a puzzle. Here's the catch: rumination feels like work but never ships an answer. Let's interrupt the loop: write the thought down in one sentence, then ask, is there an action I can take on this in the next 24 hours? If yes, we'll name the smallest one. If no, we'll park it in a worry-window for tomorrow. What's the thought that keeps circling?";

pub const HAPPY_KEYWORDS: &[&str] = &[
    "happy",
    "happiness",
    "celebrate",
    "celebrating",
    "thrilled",
    "delighted",
    "overjoyed",
    "ecstatic",
];

pub const CELEBRATION_REPLY: &str = "This is wonderful, and I'm genuinely happy for you! Wins like this deserve to be savored, not rushed past, so let's celebrate it properly. Tell me the whole story: what happened, and what did it take to get here? And before we move on, take one second to give yourself real credit; moments like this are built, not lucked into.";

pub const MOTIVATION_KEYWORDS: &[&str] = &[
    "unmotivated",
    "no motivation",
    "lazy",
    "procrastinating",
    "procrastination",
    "can't start",
    "cant start",
    "no energy to do",
    "confidence",
    "believe in myself",
];

pub const MOTIVATION_REPLY: &str = "Motivation that's gone missing isn't a character flaw; it usually means the task feels too big, too vague, or too pointless from where you stand. So let's shrink it: what's the project, and what would a two-minute version of starting look like? Confidence is built the same way, one kept promise to yourself at a time. Pick something almost too easy, do it today, and tell me when it's done; I'll be keeping score with you.";

// ---------------------------------------------------------------------------
// Rule 16: fun/playful table
// ---------------------------------------------------------------------------

pub const FUN_TABLE: &[RuleEntry] = &[
    RuleEntry {
        triggers: &["tell me a joke", "another joke", "make me laugh"],
        reply: "Why did the scarecrow win an award? Because he was outstanding in his field. I'll be here all week. Want another, or shall we talk about your day?",
    },
    RuleEntry {
        triggers: &["something funny", "say something funny"],
        reply: "Fun fact: octopuses have three hearts, and two of them stop beating when they swim. Even octopuses skip leg day. Your turn, tell me something random.",
    },
    RuleEntry {
        triggers: &["let's play a game", "lets play a game", "play a game"],
        reply: "I'm in! Two truths and a lie: you give me three statements about your week and I guess the lie. Go!",
    },
    RuleEntry {
        triggers: &["entertain me"],
        reply: "Challenge accepted. Would you rather: be able to pause time for everyone but you, or rewind your own day once per week? Defend your answer.",
    },
    RuleEntry {
        triggers: &["roast me"],
        reply: "Gently, then: you opened a chat to ask a companion app to roast you, which means you're either delightfully bored or avoiding a task. Which is it?",
    },
    RuleEntry {
        triggers: &["tell me a story"],
        reply: "Once upon a time, someone opened this chat and changed the course of their entire evening by talking about the thing they'd been avoiding. Want to be the main character, or should I invent a dragon instead?",
    },
    RuleEntry {
        triggers: &["truth or dare"],
        reply: "Truth: what's one small thing that made you smile this week? I'll trade you one of mine.",
    },
    RuleEntry {
        triggers: &["guess what"],
        reply: "Hmm... you aced something? You saw a dog wearing a sweater? I give up, tell me!",
    },
    RuleEntry {
        triggers: &["fun fact", "tell me a fact"],
        reply: "Here's one: honey never spoils. Archaeologists have eaten 3000-year-old honey from Egyptian tombs. Sweetness keeps. What's your favorite useless fact?",
    },
    RuleEntry {
        triggers: &["i'm bored", "im bored", "so bored", "bored"],
        reply: "Boredom is just curiosity waiting for an assignment. Quick menu: a game, a weird fact, or you tell me the most interesting thing that happened this week. Pick one.",
    },
    RuleEntry {
        triggers: &["sing me a song", "sing a song"],
        reply: "My singing voice is best described as 'text', but here goes: la la laaa. Okay, concert's over. What kind of music actually gets you going?",
    },
    RuleEntry {
        triggers: &["would you rather"],
        reply: "Ooh, I love these. Hit me with it, and then I get to ask you one back.",
    },
];

// ---------------------------------------------------------------------------
// Rule 17: storytelling tone — the only non-deterministic branch
// ---------------------------------------------------------------------------

pub const STORY_TONE_MARKERS: &[&str] = &["lol", "lmao", "bro", "omg", "you won't believe", "you wont believe"];

pub const STORY_TEMPLATES: &[&str] = &[
    "Okay, you have my full attention. Tell me everything!",
    "No way! I need the whole story, start to finish.",
    "Haha okay, now you HAVE to tell me everything.",
    "Oh, this sounds like a story. Spill it all!",
];

pub const STORY_FOLLOWUPS: &[&str] = &[
    "What happened right before that?",
    "And then what did you do?",
    "Who else was there when it happened?",
];

// ---------------------------------------------------------------------------
// Rule 18: misspelling corrector
// ---------------------------------------------------------------------------

/// Common emotional-word misspellings worth a clarifying nudge.
pub const MISSPELLINGS: &[(&str, &str)] = &[
    ("confued", "confused"),
    ("confussed", "confused"),
    ("anxius", "anxious"),
    ("anxios", "anxious"),
    ("stresed", "stressed"),
    ("depresed", "depressed"),
    ("lonley", "lonely"),
    ("angery", "angry"),
    ("overwelmed", "overwhelmed"),
    ("fustrated", "frustrated"),
];

// ---------------------------------------------------------------------------
// Rule 19: techniques-request mode
// ---------------------------------------------------------------------------

pub const TECHNIQUES_REQUEST_KEYWORDS: &[&str] = &[
    "technique",
    "techniques",
    "tips",
    "exercises",
    "exercise",
    "strategies",
    "coping skills",
];

pub const TECHNIQUES_HEADER: &str = "Here are a few techniques you can try:";

// ---------------------------------------------------------------------------
// Rule 20: always-answer-questions fallback
// ---------------------------------------------------------------------------

pub const QUESTION_TOKENS: &[&str] = &[
    "what", "why", "how", "when", "where", "who", "which", "can", "could", "should", "would",
    "is", "are", "do", "does", "will",
];

pub const QUESTION_FALLBACK_REPLY: &str = "That's a fair question, and questions like this get lighter once they're broken down. Here's how I'd approach it:\n\u{2022} Get clear on the goal: in one sentence, what do you want to happen?\n\u{2022} Split it into the first three concrete steps you can name.\n\u{2022} Pick the smallest next action from step one and do only that today.\nIf you tell me more about the situation, I can help you fill in the steps.";

// ---------------------------------------------------------------------------
// Rule 21: generic fallback
// ---------------------------------------------------------------------------

pub const GENERIC_FALLBACK_REPLY: &str = "I'm here with you. Whatever is on your mind, big or small, you can tell me; I'm listening.";
