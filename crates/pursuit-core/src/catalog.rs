//! Static content pools for the catalog-backed generator.

/// Suspects a case can be opened against.
pub const SUSPECTS: &[&str] = &[
    "Picasso Peculiar",
    "Bobo the Clown",
    "Madame Mirage",
    "Count Cashmere",
    "Dr. Dunes",
    "Lady Lockpick",
    "Professor Prism",
    "Snidely Sandoval",
    "The Velvet Vandal",
    "Captain Quicksilver",
    "Nina Nocturne",
    "Baron von Backflip",
];

/// Things that go missing.
pub const STOLEN_ITEMS: &[&str] = &[
    "The Louvre's Laughing Mona Lisa",
    "The crown jewels of a forgotten duchy",
    "The original recipe for fortune cookies",
    "A Stradivarius violin",
    "The torch from the Statue of Liberty",
    "The Rosetta Stone",
    "A Faberge egg",
    "The Hope Diamond",
    "The Sydney Opera House's lucky sail",
    "The world's oldest map",
    "The golden kazoo of the Vienna Philharmonic",
    "A moon rock from Apollo 11",
];

/// World cities used for itineraries, starting points and decoys.
pub const CITIES: &[&str] = &[
    "Paris",
    "Rome",
    "Cairo",
    "Tokyo",
    "New York",
    "Sydney",
    "London",
    "Mumbai",
    "Lima",
    "Chennai",
    "Bangalore",
    "Buenos Aires",
    "Nairobi",
    "Istanbul",
    "Reykjavik",
    "Bangkok",
    "Moscow",
    "Mexico City",
    "Rio de Janeiro",
    "Cape Town",
    "Vancouver",
    "Kathmandu",
    "Marrakesh",
    "Athens",
    "Beijing",
    "Singapore",
    "Havana",
    "Oslo",
    "Dublin",
    "Lisbon",
    "Seoul",
    "Hanoi",
    "Accra",
    "Montreal",
    "Santiago",
    "Venice",
];

/// Places inside a city where a witness may be found.
pub const LANDMARKS: &[&str] = &[
    "Airport",
    "Train Station",
    "Harbor",
    "Museum",
    "Bank",
    "Library",
    "Market",
    "Hotel Lobby",
    "Embassy",
    "Cafe",
    "Stock Exchange",
    "Botanical Garden",
];

/// Witness lines; `{city}` is replaced with the suspect's next stop.
pub const HINT_TEMPLATES: &[&str] = &[
    "The suspect asked me how long the flight to {city} takes.",
    "I saw them buying a guidebook about {city}.",
    "They were changing money into the currency used in {city}.",
    "The suspect mentioned meeting an accomplice in {city}.",
    "They asked for a hotel recommendation in {city}.",
    "I overheard them practicing the local greeting of {city}.",
    "They left a postcard on the counter addressed from {city}.",
    "The suspect was studying a street map of {city}.",
    "They checked the weather forecast for {city} twice.",
    "The suspect said the food in {city} was worth the trip.",
];

/// Witness lines for the suspect's last stop, where no further city is
/// left to hint at; `{suspect}` is replaced with the suspect's name.
pub const LAST_STOP_TEMPLATES: &[&str] = &[
    "{suspect} booked a room here and has not checked out.",
    "I served {suspect} breakfast this morning. They looked nervous.",
    "{suspect} was asking where to hide something valuable.",
    "Nobody has seen {suspect} leave town yet.",
    "{suspect} paid cash for a week's stay.",
];
