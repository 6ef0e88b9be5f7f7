//! Location gazetteer and name normalization.
//!
//! The persistence layer keys its time series by the normalized location
//! name, so slot filling and data loading must both go through
//! [`normalize`].

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Parenthetical qualifiers, hyphens, apostrophes and sentence punctuation.
static STRIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s*\([^)]+\)|[.,;:!?'"’\-]"#).unwrap());

/// Abbreviations and alternate names, applied after stripping.
const ALIASES: &[(&str, &str)] = &[
    ("macedonia", "north macedonia"),
    ("hk", "hong kong"),
    ("nz", "new zealand"),
    ("democratic republic of congo", "congo"),
    ("uk", "united kingdom"),
    ("na", "north america"),
    ("eu", "european union"),
    ("uae", "united arab emirates"),
    ("bosnia", "bosnia and herzegovina"),
    ("salvador", "el salvador"),
    ("virgin islands", "british virgin islands"),
    ("us", "united states"),
    ("usa", "united states"),
    ("united states of america", "united states"),
];

pub const COUNTRIES: &[&str] = &[
    "afghanistan", "albania", "algeria", "andorra", "angola", "anguilla",
    "antigua and barbuda", "argentina", "armenia", "aruba", "australia",
    "austria", "azerbaijan", "bahamas", "bahrain", "bangladesh", "barbados",
    "belarus", "belgium", "belize", "benin", "bermuda", "bhutan", "bolivia",
    "bonaire sint eustatius and saba", "bosnia and herzegovina", "botswana",
    "brazil", "british virgin islands", "brunei", "bulgaria", "burkina faso",
    "burundi", "cambodia", "cameroon", "canada", "cape verde", "cayman islands",
    "central african republic", "chad", "chile", "china", "colombia", "comoros",
    "congo", "cook islands", "costa rica", "cote divoire", "croatia", "cuba",
    "curacao", "cyprus", "czechia", "denmark", "djibouti", "dominica",
    "dominican republic", "ecuador", "egypt", "el salvador", "england",
    "equatorial guinea", "eritrea", "estonia", "eswatini", "ethiopia",
    "faeroe islands", "falkland islands", "fiji", "finland", "france",
    "french polynesia", "gabon", "gambia", "georgia", "germany", "ghana",
    "gibraltar", "greece", "greenland", "grenada", "guatemala", "guernsey",
    "guinea", "guineabissau", "guyana", "haiti", "honduras", "hong kong",
    "hungary", "iceland", "india", "indonesia", "iran", "iraq", "ireland",
    "isle of man", "israel", "italy", "jamaica", "japan", "jersey", "jordan",
    "kazakhstan", "kenya", "kiribati", "kosovo", "kuwait", "kyrgyzstan", "laos",
    "latvia", "lebanon", "lesotho", "liberia", "libya", "liechtenstein",
    "lithuania", "luxembourg", "macao", "madagascar", "malawi", "malaysia",
    "maldives", "mali", "malta", "marshall islands", "mauritania", "mauritius",
    "mexico", "micronesia", "moldova", "monaco", "mongolia", "montenegro",
    "montserrat", "morocco", "mozambique", "myanmar", "namibia", "nauru",
    "nepal", "netherlands", "new caledonia", "new zealand", "nicaragua", "niger",
    "nigeria", "niue", "north macedonia", "northern cyprus", "northern ireland",
    "norway", "oceania", "oman", "pakistan", "palau", "palestine", "panama",
    "papua new guinea", "paraguay", "peru", "philippines", "pitcairn", "poland",
    "portugal", "qatar", "romania", "russia", "rwanda", "saint helena",
    "saint kitts and nevis", "saint lucia", "saint pierre and miquelon",
    "saint vincent and the grenadines", "samoa", "san marino",
    "sao tome and principe", "saudi arabia", "scotland", "senegal", "serbia",
    "seychelles", "sierra leone", "singapore", "sint maarten", "slovakia",
    "slovenia", "solomon islands", "somalia", "south africa", "south korea",
    "south sudan", "spain", "sri lanka", "sudan", "suriname", "sweden",
    "switzerland", "syria", "taiwan", "tajikistan", "tanzania", "thailand",
    "timor", "togo", "tokelau", "tonga", "trinidad and tobago", "tunisia",
    "turkey", "turkmenistan", "turks and caicos islands", "tuvalu", "uganda",
    "ukraine", "united arab emirates", "united kingdom", "united states",
    "uruguay", "uzbekistan", "vanuatu", "vatican", "venezuela", "vietnam",
    "wales", "wallis and futuna", "yemen", "zambia", "zimbabwe",
];

pub const CONTINENTS: &[&str] = &[
    "europe",
    "asia",
    "european union",
    "north america",
    "south america",
    "africa",
];

/// The aggregate used when a query names no location.
pub const WORLD: &str = "world";

/// Locations rendered with a leading definite article.
const WITH_ARTICLE: &[&str] = &["world", "united kingdom", "ukraine", "united states"];

static KNOWN_LOCATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    COUNTRIES
        .iter()
        .chain(CONTINENTS)
        .copied()
        .chain(std::iter::once(WORLD))
        .collect()
});

/// Normalize a location name: lowercase, strip punctuation, hyphens,
/// apostrophes and parenthetical qualifiers, then resolve aliases.
pub fn normalize(name: &str) -> String {
    let lower = name.to_lowercase();
    let stripped = STRIP_PATTERN.replace_all(&lower, "");
    let stripped = stripped.trim();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == stripped)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or_else(|| stripped.to_string())
}

/// True if `normalized` is a country, a continent or the world.
pub fn is_known(normalized: &str) -> bool {
    KNOWN_LOCATIONS.contains(normalized)
}

/// Prefix "the " where English requires it ("the world", "the united
/// kingdom"). Used only when rendering a location back to text.
pub fn with_article(location: &str) -> String {
    let lower = location.to_lowercase();
    if WITH_ARTICLE.contains(&lower.as_str()) {
        format!("the {location}")
    } else {
        location.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uk_variants_normalize_alike() {
        assert_eq!(normalize("U.K."), "united kingdom");
        assert_eq!(normalize("uk"), "united kingdom");
        assert_eq!(normalize("UK"), normalize("U.K."));
    }

    #[test]
    fn usa_normalizes_to_united_states() {
        assert_eq!(normalize("USA"), "united states");
        assert_eq!(normalize("U.S."), "united states");
        assert_eq!(normalize("United States of America"), "united states");
    }

    #[test]
    fn aliases_from_table() {
        assert_eq!(normalize("HK"), "hong kong");
        assert_eq!(normalize("Macedonia"), "north macedonia");
        assert_eq!(normalize("EU"), "european union");
        assert_eq!(normalize("NA"), "north america");
        assert_eq!(normalize("Bosnia"), "bosnia and herzegovina");
        assert_eq!(normalize("Salvador"), "el salvador");
        assert_eq!(normalize("Virgin Islands"), "british virgin islands");
    }

    #[test]
    fn strips_parenthetical_and_apostrophes() {
        assert_eq!(normalize("Congo (Brazzaville)"), "congo");
        assert_eq!(normalize("Cote d'Ivoire"), "cote divoire");
        assert_eq!(normalize("Guinea-Bissau"), "guineabissau");
        assert!(is_known(&normalize("Guinea-Bissau")));
    }

    #[test]
    fn unlisted_string_passes_through() {
        let normalized = normalize("Atlantis!");
        assert_eq!(normalized, "atlantis");
        assert!(!is_known(&normalized));
    }

    #[test]
    fn gazetteer_membership() {
        assert!(is_known("germany"));
        assert!(is_known("europe"));
        assert!(is_known("world"));
        assert!(!is_known("covid"));
    }

    #[test]
    fn article_prefixing() {
        assert_eq!(with_article("world"), "the world");
        assert_eq!(with_article("united kingdom"), "the united kingdom");
        assert_eq!(with_article("Ukraine"), "the Ukraine");
        assert_eq!(with_article("united states"), "the united states");
        assert_eq!(with_article("germany"), "germany");
    }
}
