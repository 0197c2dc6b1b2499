/// Built-in word categories, in menu order. Each entry is (word, hint).
pub const WORD_CATEGORIES: [(&str, &[(&str, &str)]); 4] = [
    (
        "Animals",
        &[
            ("elephant", "A large mammal with a trunk"),
            ("penguin", "A flightless bird that lives in cold regions"),
            ("dolphin", "An intelligent marine mammal"),
            ("kangaroo", "An Australian animal that hops"),
            ("butterfly", "A colorful insect with wings"),
            ("giraffe", "The tallest land animal"),
            ("octopus", "A sea creature with eight arms"),
            ("cheetah", "The fastest land animal"),
        ],
    ),
    (
        "Countries",
        &[
            ("australia", "Home to kangaroos and koalas"),
            ("brazil", "Famous for carnival and Amazon rainforest"),
            ("japan", "Land of the rising sun"),
            ("egypt", "Home to pyramids and pharaohs"),
            ("canada", "Known for maple syrup"),
            ("india", "Country with the Taj Mahal"),
            ("france", "Famous for the Eiffel Tower"),
            ("mexico", "Known for tacos and ancient Mayan ruins"),
        ],
    ),
    (
        "Technology",
        &[
            ("computer", "Electronic device for processing data"),
            ("internet", "Global network connecting millions of devices"),
            ("software", "Programs and applications that run on devices"),
            ("keyboard", "Input device with letters and numbers"),
            ("algorithm", "Step-by-step problem-solving procedure"),
            ("database", "Organized collection of data"),
            ("python", "Popular programming language"),
            ("artificial", "Type of intelligence created by humans"),
        ],
    ),
    (
        "Sports",
        &[
            ("football", "Popular sport played with a round ball"),
            ("cricket", "Bat and ball game popular in India"),
            ("basketball", "Game with a hoop and orange ball"),
            ("swimming", "Water sport and exercise"),
            ("tennis", "Racket sport played on a court"),
            ("volleyball", "Team sport with a net"),
            ("badminton", "Racket sport with a shuttlecock"),
            ("hockey", "Game played with a stick and puck or ball"),
        ],
    ),
];

/// Gallows drawings indexed by number of wrong guesses.
pub const GALLOWS_STAGES: [&str; 7] = [
    r"
   ------
   |    |
   |
   |
   |
   |
--------",
    r"
   ------
   |    |
   |    O
   |
   |
   |
--------",
    r"
   ------
   |    |
   |    O
   |    |
   |
   |
--------",
    r"
   ------
   |    |
   |    O
   |   /|
   |
   |
--------",
    r"
   ------
   |    |
   |    O
   |   /|\
   |
   |
--------",
    r"
   ------
   |    |
   |    O
   |   /|\
   |   /
   |
--------",
    r"
   ------
   |    |
   |    O
   |   /|\
   |   / \
   |
--------",
];

pub const BANNER_WIDTH: usize = 50;
