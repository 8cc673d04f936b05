//! Static word tables used while building the dictionary.

/// Entries that pass the shape checks but must never show up in a puzzle:
/// proper names, brands, technical jargon, date and time fragments, and
/// acronyms that frequency lists pick up from web text.
pub const BLACKLIST: &[&str] = &[
    // proper names and places
    "aaron", "adam", "alan", "alex", "alice", "amanda", "amazon", "andrew", "anna", "arizona",
    "asia", "austin", "barbara", "berlin", "betty", "bobby", "boston", "brian", "bruce",
    "canada", "carl", "charlie", "chris", "cindy", "daniel", "dave", "david", "denver", "diana",
    "dublin", "dutch", "eric", "europe", "gary", "george", "greg", "harry", "helen",
    "henry", "india", "iowa", "irish", "italy", "james", "jane", "japan", "jason",
    "jeff", "jerry", "jesus", "jimmy", "joel", "john", "johnny", "jones", "jose", "joseph",
    "judy", "julia", "karen", "kansas", "kelly", "kevin", "larry", "laura", "linda", "lisa",
    "london", "louis", "maria", "mario", "martin", "mary", "mexico", "miami", "michael",
    "mike", "moscow", "nancy", "nevada", "ohio", "oregon", "paris", "paul", "peter", "philip",
    "ralph", "randy", "roger", "rome", "russia", "ryan", "sarah", "scott", "smith", "spain",
    "steve", "susan", "sydney", "texas", "tokyo", "tony", "utah", "wales", "wayne", "york",
    // brands and products
    "adobe", "apache", "cisco", "dell", "disney", "ebay", "epson", "google", "honda",
    "intel", "lexus", "mazda", "nikon", "nokia", "paypal", "pepsi", "sega", "sony",
    "toyota", "yahoo", "xerox", "yamaha", "nissan", "subaru", "kodak", "lego", "rolex", "ikea",
    // technical jargon
    "ajax", "blog", "blogs", "cgi", "config", "cpu", "debug", "email",
    "emails", "faq", "href", "html", "http", "https", "ipod", "java", "jpeg", "kbps", "linux",
    "login", "logout", "mysql", "online", "perl", "php", "plugin",
    "scsi", "sql", "tcp", "ubuntu", "unix", "upload", "usb", "username", "webcam",
    "website", "webcast", "gigabit", "telecom", "wiki", "www", "xml", "yaml", "zope",
    // date and time fragments
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sept", "sep", "oct", "nov", "dec",
    "mon", "tue", "tues", "wed", "thu", "thur", "thurs", "fri", "sat", "sun", "est", "gmt",
    "pst", "edt", "utc",
    // noise acronyms
    "asap", "aka", "diy", "etc", "lol", "omg", "faqs", "nasa", "nato", "usa", "inc", "corp",
    "llc", "ltd", "isbn", "ieee", "nyse",
];

/// Curated words that are always part of the dictionary. Frequency-ranked
/// lists under-represent literary and archaic vocabulary that still reads as
/// a real word to players.
pub const SUPPLEMENT: &[&str] = &[
    "aloe", "bard", "dirge", "ember", "fable", "glade", "grail", "hearth", "knave", "lore",
    "mead", "moor", "oath", "quill", "rune", "saga", "sage", "thane", "tome", "vale", "wane",
    "yore", "elixir", "gilded", "alder", "lair", "tarn", "raven", "sorrow", "garden",
];

/// Offline dictionary used when the word source cannot be read. Spans every
/// admissible length; [`SUPPLEMENT`] is merged in when it is loaded.
pub const FALLBACK_WORDS: &[&str] = &[
    // garden family
    "dare", "dear", "read", "rage", "gear", "near", "earn", "darn", "rand", "grand", "range",
    "anger", "grade", "raged", "dean", "aged", "nerd", "rend", "danger", "gander", "ranged",
    "grader", "regard",
    // strain family
    "rain", "rant", "star", "tsar", "stair", "train", "saint", "satin", "stain", "strain",
    "trains", "trails", "instar",
    // planets and misc
    "planet", "plane", "plate", "petal", "leap", "plan", "lane", "late", "tale", "pale",
    "stone", "notes", "onset", "tones", "note", "tone", "nose", "toes", "stream", "master",
    "tamers", "steam", "mates", "meat", "team", "tame", "mast", "mare", "tear", "rate",
    "streams", "masters", "reading", "trading", "gardens",
];
