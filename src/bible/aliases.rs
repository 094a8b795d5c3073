//! Common book names and abbreviations.
//!
//! Keys are normalized tokens (see [`normalize_token`]); values are the
//! standard abbreviations of [`super::canon::BOOKS`].

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Alternative spellings per standard abbreviation.
const ALIASES: &[(&str, &[&str])] = &[
    // Old Testament
    ("GEN", &["gen", "ge", "gn", "genesis"]),
    ("EXO", &["ex", "exo", "exod", "exodus"]),
    ("LEV", &["lev", "le", "lv", "leviticus"]),
    ("NUM", &["num", "nu", "nm", "numb", "numbers"]),
    ("DEU", &["deut", "deu", "dt", "deuteronomy"]),
    ("JOS", &["josh", "jos", "joshua"]),
    ("JDG", &["judg", "jdg", "jdgs", "judges"]),
    ("RUT", &["ruth", "rut", "ru"]),
    ("1SA", &["1sam", "1sa", "1sm", "1samuel"]),
    ("2SA", &["2sam", "2sa", "2sm", "2samuel"]),
    ("1KI", &["1kgs", "1ki", "1kin", "1kings"]),
    ("2KI", &["2kgs", "2ki", "2kin", "2kings"]),
    ("1CH", &["1chr", "1ch", "1chron", "1chronicles"]),
    ("2CH", &["2chr", "2ch", "2chron", "2chronicles"]),
    ("EZR", &["ezra", "ezr"]),
    ("NEH", &["neh", "ne", "nehemiah"]),
    ("EST", &["esth", "est", "es", "esther"]),
    ("JOB", &["job", "jb"]),
    ("PSA", &["ps", "psa", "psm", "pss", "psalm", "psalms"]),
    ("PRO", &["prov", "pro", "prv", "pr", "proverbs"]),
    ("ECC", &["eccl", "ecc", "eccles", "qoh", "ecclesiastes"]),
    ("SNG", &["song", "sng", "sos", "songofsolomon", "songofsongs", "canticles"]),
    ("ISA", &["isa", "is", "isaiah"]),
    ("JER", &["jer", "je", "jr", "jeremiah"]),
    ("LAM", &["lam", "la", "lamentations"]),
    ("EZK", &["ezek", "ezk", "eze", "ezekiel"]),
    ("DAN", &["dan", "da", "dn", "daniel"]),
    ("HOS", &["hos", "ho", "hosea"]),
    ("JOL", &["joel", "jol", "jl"]),
    ("AMO", &["amos", "amo", "am"]),
    ("OBA", &["obad", "oba", "ob", "obadiah"]),
    ("JON", &["jonah", "jon", "jnh"]),
    ("MIC", &["mic", "mc", "micah"]),
    ("NAM", &["nah", "nam", "na", "nahum"]),
    ("HAB", &["hab", "hb", "habakkuk"]),
    ("ZEP", &["zeph", "zep", "zp", "zephaniah"]),
    ("HAG", &["hag", "hg", "haggai"]),
    ("ZEC", &["zech", "zec", "zc", "zechariah"]),
    ("MAL", &["mal", "ml", "malachi"]),
    // New Testament
    ("MAT", &["matt", "mat", "mt", "matthew"]),
    ("MRK", &["mark", "mrk", "mk", "mr"]),
    ("LUK", &["luke", "luk", "lk"]),
    ("JHN", &["john", "jhn", "jn", "joh"]),
    ("ACT", &["acts", "act", "ac"]),
    ("ROM", &["rom", "ro", "rm", "romans"]),
    ("1CO", &["1cor", "1co", "1corinthians"]),
    ("2CO", &["2cor", "2co", "2corinthians"]),
    ("GAL", &["gal", "ga", "galatians"]),
    ("EPH", &["eph", "ephes", "ephesians"]),
    ("PHP", &["phil", "php", "pp", "philippians"]),
    ("COL", &["col", "co", "colossians"]),
    ("1TH", &["1thess", "1th", "1thes", "1thessalonians"]),
    ("2TH", &["2thess", "2th", "2thes", "2thessalonians"]),
    ("1TI", &["1tim", "1ti", "1timothy"]),
    ("2TI", &["2tim", "2ti", "2timothy"]),
    ("TIT", &["titus", "tit", "ti"]),
    ("PHM", &["philem", "phm", "phlm", "philemon"]),
    ("HEB", &["heb", "hebrews"]),
    ("JAS", &["james", "jas", "jm"]),
    ("1PE", &["1pet", "1pe", "1pt", "1peter"]),
    ("2PE", &["2pet", "2pe", "2pt", "2peter"]),
    ("1JN", &["1john", "1jn", "1jo", "1joh"]),
    ("2JN", &["2john", "2jn", "2jo", "2joh"]),
    ("3JN", &["3john", "3jn", "3jo", "3joh"]),
    ("JUD", &["jude", "jud", "jd"]),
    ("REV", &["rev", "re", "rv", "revelation", "revelations"]),
];

lazy_static! {
    /// Book name normalization map
    pub static ref BOOK_ALIASES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        for (abbreviation, names) in ALIASES {
            for name in *names {
                m.insert(*name, *abbreviation);
            }
        }
        m
    };
}

/// Normalize a user-typed book token: lowercase, without whitespace or dots.
pub fn normalize_token(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .flat_map(char::to_lowercase)
        .collect()
}
