//! Embedded word lists
//!
//! Curated five-letter lists built into the library so the binary works with
//! no external files. ANSWERS holds the words a solution is drawn from;
//! ALLOWED is the strict superset of everything guessable. Larger lists can
//! be supplied at runtime through the loader.

/// Words a game solution may be drawn from
pub const ANSWERS: &[&str] = &[
    "crane",
    "slate",
    "alloy",
    "llama",
    "audio",
    "irate",
    "stare",
    "crate",
    "trace",
    "adieu",
    "house",
    "mouse",
    "pride",
    "grime",
    "flame",
    "globe",
    "ocean",
    "piano",
    "quilt",
    "charm",
    "brick",
    "storm",
    "lemon",
    "tiger",
    "zebra",
    "eagle",
    "shark",
    "whale",
    "snake",
    "mango",
    "peach",
    "apple",
    "grape",
    "berry",
    "melon",
    "onion",
    "bread",
    "toast",
    "spice",
    "sugar",
    "honey",
    "cream",
    "frost",
    "cloud",
    "rainy",
    "windy",
    "sunny",
    "night",
    "light",
    "sound",
    "music",
    "dance",
    "party",
    "smile",
    "laugh",
    "happy",
    "brave",
    "quiet",
    "proud",
    "fresh",
    "sweet",
    "sharp",
    "round",
];

/// Number of words in ANSWERS
pub const ANSWERS_COUNT: usize = 63;

/// All guessable words (every answer plus guess-only words)
pub const ALLOWED: &[&str] = &[
    "crane",
    "slate",
    "alloy",
    "llama",
    "audio",
    "irate",
    "stare",
    "crate",
    "trace",
    "adieu",
    "house",
    "mouse",
    "pride",
    "grime",
    "flame",
    "globe",
    "ocean",
    "piano",
    "quilt",
    "charm",
    "brick",
    "storm",
    "lemon",
    "tiger",
    "zebra",
    "eagle",
    "shark",
    "whale",
    "snake",
    "mango",
    "peach",
    "apple",
    "grape",
    "berry",
    "melon",
    "onion",
    "bread",
    "toast",
    "spice",
    "sugar",
    "honey",
    "cream",
    "frost",
    "cloud",
    "rainy",
    "windy",
    "sunny",
    "night",
    "light",
    "sound",
    "music",
    "dance",
    "party",
    "smile",
    "laugh",
    "happy",
    "brave",
    "quiet",
    "proud",
    "fresh",
    "sweet",
    "sharp",
    "round",
    "salet",
    "soare",
    "roate",
    "raise",
    "arise",
    "tares",
    "lares",
    "rales",
    "cones",
    "aeros",
    "arose",
    "least",
    "tales",
    "reast",
    "slant",
    "trice",
    "crone",
    "drone",
    "prone",
    "brine",
    "spine",
    "shine",
    "thine",
    "whine",
    "urate",
    "orate",
    "oater",
    "terns",
    "rents",
    "stern",
    "snort",
    "intro",
    "nitro",
    "noise",
    "anise",
    "aisle",
    "laser",
    "blare",
    "flare",
    "glare",
    "scare",
    "snare",
    "spare",
    "swear",
    "smear",
    "shear",
];

/// Number of words in ALLOWED
pub const ALLOWED_COUNT: usize = 109;
