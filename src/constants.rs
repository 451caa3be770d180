/// Source page and request defaults
pub const DEFAULT_SOURCE_URL: &str =
    "https://en.wikipedia.org/wiki/List_of_most-visited_museums#Most-visited_museums_in_2024";

// Desktop Chrome; Wikipedia rejects the default reqwest agent for bulk fetches
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

/// Reference table location used when nothing else is configured
pub const DEFAULT_REFERENCE_CSV: &str = "worldcities.csv";

// Column headers in the museums table
pub const NAME_COLUMN: &str = "Name";
pub const VISITORS_COLUMN: &str = "Visitors in 2024";
pub const VISITORS_COLUMN_PREFIX: &str = "visitors";
pub const CITY_COLUMN: &str = "City";
pub const COUNTRY_COLUMN: &str = "Country";

/// Minimum fuzzy score (0-100) for accepting a city name match
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 85;

/// Populations used by the predict endpoint when none are given
pub const DEFAULT_POPULATIONS: &str = "1000000,5000000,10000000";

pub const DEFAULT_PORT: u16 = 8000;

// Visitor strings longer than this are truncated before parsing
pub const VISITOR_TEXT_MAX_CHARS: usize = 9;

pub const MILLION_SUFFIXES: [&str; 3] = ["mil", "milli", "mill"];

/// Tukey fence multiplier for the ratio outlier filter
pub const IQR_FENCE: f64 = 1.5;
