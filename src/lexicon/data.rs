// src/lexicon/data.rs
//! Built-in lexical tables. `LexiconBuilder::standard` turns these into
//! owned records once at startup.

use super::records::{
    AcquisitionBand, AffixCategory, Gender, GrammaticalNumber, Manner, PatternKind, Person, Place, Voicing,
    VowelLength,
};
use crate::core::types::{AgeGroup, Theme};

use AgeGroup::{FourToSix as A46, ThreeToFour as A34, TwoToThree as A23};

pub(crate) const ROOTS: &[(&str, &str, &[&str])] = &[
    ("אכל", "eat", &["אוכל", "אכלה", "נאכל"]),
    ("שתה", "drink", &["שותה", "שתיה", "משקה"]),
    ("ישב", "sit", &["יושב", "ישיבה", "מושב"]),
    ("הלך", "walk/go", &["הולך", "הליכה", "מהלך"]),
    ("שחק", "play", &["שחקן", "משחק", "שחקה"]),
    ("קרא", "read/call", &["קורא", "קריאה", "מקרא"]),
    ("כתב", "write", &["כותב", "כתיבה", "מכתב"]),
    ("רוץ", "run", &["רץ", "ריצה", "מרוץ"]),
    ("שמע", "hear", &["שומע", "שמיעה", "משמע"]),
    ("ראה", "see", &["רואה", "ראייה", "מראה"]),
    ("ידע", "know", &["יודע", "ידיעה", "מדע"]),
    ("דבר", "speak", &["מדבר", "דיבור", "דברים"]),
    ("עבד", "work", &["עובד", "עבודה", "מעבד"]),
    ("למד", "learn", &["לומד", "למידה", "תלמיד"]),
    ("שיר", "sing", &["שר", "שירה", "שיר"]),
    ("רקד", "dance", &["רוקד", "ריקוד", "רקדן"]),
    ("צבע", "paint/color", &["צובע", "צבע", "צביעה"]),
    ("בנה", "build", &["בונה", "בניין", "מבנה"]),
    ("שבר", "break", &["שובר", "שבירה", "שבר"]),
    ("סגר", "close", &["סוגר", "סגירה", "מסגר"]),
];

pub(crate) const PATTERNS: &[(PatternKind, &str, &str, &str, &str, &[&str])] = &[
    (PatternKind::Basic, "פעל", "Pa'al", "CaCaC", "CV.CVC", &["כתב", "שמע", "ידע"]),
    (PatternKind::Intensive, "פיעל", "Pi'el", "CiCeC", "Ci.CeC", &["דיבר", "שיחק", "ליטף"]),
    (PatternKind::Causative, "הפעיל", "Hif'il", "hiCCiC", "hi.C.CiC", &["הגדיל", "הכניס", "הוציא"]),
    (PatternKind::Reflexive, "התפעל", "Hitpa'el", "hitCaCeC", "hit.Ca.CeC", &["התלבש", "התרחץ", "השתעשע"]),
    (PatternKind::Passive, "נפעל", "Nif'al", "niCCaC", "ni.C.CaC", &["נשבר", "נסגר", "נפתח"]),
    (PatternKind::Participle, "מפעל", "Pa'al/Pi'el participle", "meCaCeC", "me.Ca.CeC", &["מדבר", "משחק", "מצייר"]),
];

pub(crate) const PREFIX_PARTICLES: &[(&str, AffixCategory, &str, &str)] = &[
    ("ה", AffixCategory::Article, "definite_article", "the"),
    ("ו", AffixCategory::Conjunction, "conjunction", "and"),
    ("ב", AffixCategory::Preposition, "preposition", "in/at"),
    ("כ", AffixCategory::Preposition, "preposition", "like/as"),
    ("ל", AffixCategory::Preposition, "preposition", "to/for"),
    ("מ", AffixCategory::Preposition, "preposition", "from"),
    ("ש", AffixCategory::Relative, "relative", "that/which"),
];

/// Prefix sequences in matching priority: combined sequences before single letters.
pub(crate) const PREFIX_SEQUENCES: &[&str] = &["וה", "וב", "וכ", "ול", "ומ", "וש", "ה", "ו", "ב", "כ", "ל", "מ", "ש"];

type SuffixRow = (&'static str, AffixCategory, &'static str, Option<Person>, Option<GrammaticalNumber>, Option<Gender>);

pub(crate) const SUFFIXES: &[SuffixRow] = &[
    ("ים", AffixCategory::Number, "plural_masculine", None, Some(GrammaticalNumber::Plural), Some(Gender::Masculine)),
    ("ות", AffixCategory::Number, "plural_feminine", None, Some(GrammaticalNumber::Plural), Some(Gender::Feminine)),
    ("ה", AffixCategory::Number, "feminine_singular", None, Some(GrammaticalNumber::Singular), Some(Gender::Feminine)),
    ("ת", AffixCategory::Number, "feminine_singular_alt", None, Some(GrammaticalNumber::Singular), Some(Gender::Feminine)),
    ("ך", AffixCategory::Possessive, "possessive_2sg", Some(Person::Second), Some(GrammaticalNumber::Singular), None),
    ("כם", AffixCategory::Possessive, "possessive_2pl_m", Some(Person::Second), Some(GrammaticalNumber::Plural), Some(Gender::Masculine)),
    ("כן", AffixCategory::Possessive, "possessive_2pl_f", Some(Person::Second), Some(GrammaticalNumber::Plural), Some(Gender::Feminine)),
    ("י", AffixCategory::Possessive, "possessive_1sg", Some(Person::First), Some(GrammaticalNumber::Singular), None),
    ("נו", AffixCategory::Possessive, "possessive_1pl", Some(Person::First), Some(GrammaticalNumber::Plural), None),
    ("ו", AffixCategory::Possessive, "possessive_3sg_m", Some(Person::Third), Some(GrammaticalNumber::Singular), Some(Gender::Masculine)),
    ("הם", AffixCategory::Possessive, "possessive_3pl_m", Some(Person::Third), Some(GrammaticalNumber::Plural), Some(Gender::Masculine)),
    ("הן", AffixCategory::Possessive, "possessive_3pl_f", Some(Person::Third), Some(GrammaticalNumber::Plural), Some(Gender::Feminine)),
];

type ConsonantRow = (&'static str, &'static str, &'static str, Manner, Place, Voicing, bool, &'static str);

pub(crate) const CONSONANTS: &[ConsonantRow] = &[
    // stops
    ("ב", "b", "b", Manner::Stop, Place::Bilabial, Voicing::Voiced, false, "bet"),
    ("בּ", "b", "b", Manner::Stop, Place::Bilabial, Voicing::Voiced, true, "bet with dagesh"),
    ("פּ", "p", "p", Manner::Stop, Place::Bilabial, Voicing::Voiceless, true, "pe with dagesh"),
    ("ד", "d", "d", Manner::Stop, Place::Alveolar, Voicing::Voiced, false, "dalet"),
    ("ט", "t", "t", Manner::Stop, Place::Alveolar, Voicing::Voiceless, false, "tet"),
    ("תּ", "t", "t", Manner::Stop, Place::Alveolar, Voicing::Voiceless, true, "tav with dagesh"),
    ("כּ", "k", "k", Manner::Stop, Place::Velar, Voicing::Voiceless, true, "kaf with dagesh"),
    ("ק", "k", "k", Manner::Stop, Place::Uvular, Voicing::Voiceless, false, "qof"),
    ("ג", "g", "ɡ", Manner::Stop, Place::Velar, Voicing::Voiced, false, "gimel"),
    ("גּ", "g", "ɡ", Manner::Stop, Place::Velar, Voicing::Voiced, true, "gimel with dagesh"),
    // fricatives
    ("ו", "v", "v", Manner::Fricative, Place::Labiodental, Voicing::Voiced, false, "vav"),
    ("פ", "f", "f", Manner::Fricative, Place::Labiodental, Voicing::Voiceless, false, "fe"),
    ("ז", "z", "z", Manner::Fricative, Place::Alveolar, Voicing::Voiced, false, "zayin"),
    ("ס", "s", "s", Manner::Fricative, Place::Alveolar, Voicing::Voiceless, false, "samekh"),
    ("ש", "sh", "ʃ", Manner::Fricative, Place::PostAlveolar, Voicing::Voiceless, false, "shin"),
    ("ח", "kh", "χ", Manner::Fricative, Place::Uvular, Voicing::Voiceless, false, "khet"),
    ("כ", "kh", "χ", Manner::Fricative, Place::Velar, Voicing::Voiceless, false, "khaf"),
    ("ת", "s", "s", Manner::Fricative, Place::Alveolar, Voicing::Voiceless, false, "tav (in some dialects)"),
    // affricates
    ("צ", "ts", "ts", Manner::Affricate, Place::Alveolar, Voicing::Voiceless, false, "tsadi"),
    // nasals
    ("מ", "m", "m", Manner::Nasal, Place::Bilabial, Voicing::Voiced, false, "mem"),
    ("נ", "n", "n", Manner::Nasal, Place::Alveolar, Voicing::Voiced, false, "nun"),
    // liquids
    ("ל", "l", "l", Manner::Lateral, Place::Alveolar, Voicing::Voiced, false, "lamed"),
    ("ר", "r", "ʁ", Manner::Trill, Place::Uvular, Voicing::Voiced, false, "resh"),
    // glides
    ("י", "y", "j", Manner::Glide, Place::Palatal, Voicing::Voiced, false, "yod"),
    // glottal and pharyngeal
    ("ה", "h", "h", Manner::Fricative, Place::Glottal, Voicing::Voiceless, false, "he"),
    ("א", "'", "ʔ", Manner::Stop, Place::Glottal, Voicing::Voiceless, false, "alef"),
    ("ע", "'", "ʕ", Manner::Fricative, Place::Pharyngeal, Voicing::Voiced, false, "ayin"),
];

pub(crate) const VOWELS: &[(char, &str, &str, &str, VowelLength)] = &[
    ('\u{05B7}', "a", "a", "patach", VowelLength::Short),
    ('\u{05B8}', "a", "ɑ", "kamatz", VowelLength::Long),
    ('\u{05B6}', "e", "ɛ", "segol", VowelLength::Short),
    ('\u{05B5}', "e", "e", "tzere", VowelLength::Long),
    ('\u{05B4}', "i", "i", "hiriq", VowelLength::Short),
    ('\u{05B9}', "o", "o", "holam", VowelLength::Long),
    ('\u{05BB}', "u", "u", "kubutz", VowelLength::Short),
    ('\u{05B0}', "ə", "ə", "shva", VowelLength::Ultrashort),
    ('\u{05B1}', "e", "ɛ", "hataf-segol", VowelLength::Ultrashort),
    ('\u{05B2}', "a", "a", "hataf-patach", VowelLength::Ultrashort),
    ('\u{05B3}', "o", "o", "hataf-kamatz", VowelLength::Ultrashort),
];

pub(crate) const BANDS: &[(AcquisitionBand, u8, &[&str], &[&str], &str)] = &[
    (
        AcquisitionBand::Early,
        3,
        &["מ", "נ", "ב", "פּ", "ט", "ד", "ה"],
        &["m", "n", "b", "p", "t", "d", "h", "w"],
        "Earliest acquired sounds, suitable for youngest children",
    ),
    (
        AcquisitionBand::Middle,
        4,
        &["כּ", "ק", "ג", "פ", "ו", "י", "ל"],
        &["k", "g", "f", "v", "y", "l"],
        "Moderately challenging sounds for preschoolers",
    ),
    (
        AcquisitionBand::Late,
        6,
        &["ס", "ז", "ש", "צ", "ר", "כ", "ח"],
        &["s", "z", "sh", "ts", "r", "kh"],
        "Later acquired sounds, often targets for therapy",
    ),
    (
        AcquisitionBand::Complex,
        8,
        &["ח", "צ", "ר"],
        &["kh", "ts", "r"],
        "Most challenging sounds, common therapy targets",
    ),
];

/// Canonical vowel-pointed forms. Every pointed form strips back to its key.
pub(crate) const NIKUD_DICTIONARY: &[(&str, &str)] = &[
    // verbs
    ("אוכל", "אוֹכֵל"),
    ("שותה", "שׁוֹתֶה"),
    ("יושב", "יוֹשֵׁב"),
    ("הולך", "הוֹלֵךְ"),
    ("רץ", "רָץ"),
    ("שר", "שָׁר"),
    ("רוקד", "רוֹקֵד"),
    ("משחק", "מְשַׂחֵק"),
    ("קורא", "קוֹרֵא"),
    ("כותב", "כּוֹתֵב"),
    ("שומע", "שׁוֹמֵעַ"),
    ("רואה", "רוֹאֶה"),
    ("מדבר", "מְדַבֵּר"),
    ("צובע", "צוֹבֵעַ"),
    ("בונה", "בּוֹנֶה"),
    ("שובר", "שׁוֹבֵר"),
    // nouns
    ("ילד", "יֶלֶד"),
    ("ילדה", "יַלְדָּה"),
    ("אמא", "אִמָּא"),
    ("אבא", "אַבָּא"),
    ("בית", "בַּיִת"),
    ("כלב", "כֶּלֶב"),
    ("חתול", "חָתוּל"),
    ("ספר", "סֵפֶר"),
    ("כדור", "כַּדּוּר"),
    ("בובה", "בּוּבָּה"),
    ("מכונית", "מְכוֹנִית"),
    ("אוטובוס", "אוֹטוֹבּוּס"),
    ("עץ", "עֵץ"),
    ("פרח", "פֶּרַח"),
    ("שמש", "שֶׁמֶשׁ"),
    ("ירח", "יָרֵחַ"),
    ("מים", "מַיִם"),
    ("לחם", "לֶחֶם"),
    ("חלב", "חָלָב"),
    ("גבינה", "גְּבִינָה"),
    // colors
    ("אדום", "אָדוֹם"),
    ("כחול", "כָּחוֹל"),
    ("ירוק", "יָרוֹק"),
    ("צהוב", "צָהוֹב"),
    ("לבן", "לָבָן"),
    ("שחור", "שָׁחוֹר"),
    ("ורוד", "וָרוֹד"),
    ("כתום", "כָּתוֹם"),
    // body parts
    ("ראש", "רֹאשׁ"),
    ("פנים", "פָּנִים"),
    ("עין", "עַיִן"),
    ("אף", "אַף"),
    ("פה", "פֶּה"),
    ("אוזן", "אוֹזֶן"),
    ("יד", "יָד"),
    ("רגל", "רֶגֶל"),
    ("בטן", "בֶּטֶן"),
    ("גב", "גַּב"),
    // numbers
    ("אחד", "אֶחָד"),
    ("שניים", "שְׁנַיִים"),
    ("שלוש", "שָׁלוֹשׁ"),
    ("ארבע", "אַרְבַּע"),
    ("חמש", "חָמֵשׁ"),
    ("שש", "שֵׁשׁ"),
    ("שבע", "שֶׁבַע"),
    ("שמונה", "שְׁמוֹנֶה"),
    ("תשע", "תֵּשַׁע"),
    ("עשר", "עֶשֶׂר"),
    // adjectives
    ("גדול", "גָּדוֹל"),
    ("קטן", "קָטָן"),
    ("יפה", "יָפֶה"),
    ("טוב", "טוֹב"),
    ("רע", "רַע"),
    ("שמח", "שָׂמֵחַ"),
    ("עצוב", "עָצוּב"),
    ("חם", "חַם"),
    ("קר", "קַר"),
];

type VocabularyRow = (Theme, AgeGroup, &'static str, &'static str, &'static str, &'static [&'static str], Option<&'static str>);

pub(crate) const VOCABULARY: &[VocabularyRow] = &[
    // animals
    (Theme::Animals, A23, "כלב", "כֶּלֶב", "dog", &["כ", "ל", "ב"], None),
    (Theme::Animals, A23, "חתול", "חָתוּל", "cat", &["ח", "ת", "ל"], None),
    (Theme::Animals, A23, "ציפור", "צִיפּוֹר", "bird", &["צ", "פ", "ר"], None),
    (Theme::Animals, A23, "דג", "דָּג", "fish", &["ד", "ג"], None),
    (Theme::Animals, A23, "פרה", "פָּרָה", "cow", &["פ", "ר", "ה"], None),
    (Theme::Animals, A23, "סוס", "סוּס", "horse", &["ס", "ו", "ס"], None),
    (Theme::Animals, A23, "ברווז", "בַּרְווָז", "duck", &["ב", "ר", "ו", "ז"], None),
    (Theme::Animals, A34, "פיל", "פִּיל", "elephant", &["פ", "י", "ל"], None),
    (Theme::Animals, A34, "ארי", "אֲרִי", "lion", &["א", "ר", "י"], None),
    (Theme::Animals, A34, "ג'ירפה", "גִ'ירָפָה", "giraffe", &["ג", "ר", "פ"], None),
    (Theme::Animals, A34, "קוף", "קוֹף", "monkey", &["ק", "ו", "פ"], None),
    (Theme::Animals, A34, "דוב", "דּוֹב", "bear", &["ד", "ו", "ב"], None),
    (Theme::Animals, A34, "זאב", "זְאֵב", "wolf", &["ז", "א", "ב"], None),
    (Theme::Animals, A34, "שועל", "שׁוּעָל", "fox", &["ש", "ו", "ע", "ל"], None),
    (Theme::Animals, A34, "צב", "צָב", "turtle", &["צ", "ב"], None),
    (Theme::Animals, A34, "ארנב", "אַרְנָב", "rabbit", &["א", "ר", "נ", "ב"], None),
    (Theme::Animals, A46, "תנין", "תַּנִּין", "crocodile", &["ת", "נ", "י", "ן"], None),
    (Theme::Animals, A46, "נמר", "נָמֵר", "tiger", &["נ", "מ", "ר"], None),
    (Theme::Animals, A46, "זברה", "זֶבְרָה", "zebra", &["ז", "ב", "ר"], None),
    (Theme::Animals, A46, "קנגורו", "קֶנְגּוּרוּ", "kangaroo", &["ק", "נ", "ג", "ר"], None),
    (Theme::Animals, A46, "דולפין", "דּוֹלְפִין", "dolphin", &["ד", "ל", "פ", "נ"], None),
    (Theme::Animals, A46, "פינגווין", "פִּינְגְּווִין", "penguin", &["פ", "נ", "ג", "ו", "ן"], None),
    // food
    (Theme::Food, A23, "לחם", "לֶחֶם", "bread", &["ל", "ח", "מ"], None),
    (Theme::Food, A23, "חלב", "חָלָב", "milk", &["ח", "ל", "ב"], None),
    (Theme::Food, A23, "מים", "מַיִם", "water", &["מ", "י", "ם"], None),
    (Theme::Food, A23, "תפוח", "תַּפּוּחַ", "apple", &["ת", "פ", "ח"], None),
    (Theme::Food, A23, "בננה", "בָּנָנָה", "banana", &["ב", "נ", "ה"], None),
    (Theme::Food, A23, "עוגה", "עוּגָה", "cake", &["ע", "ג", "ה"], None),
    (Theme::Food, A23, "ביצה", "בֵּיצָה", "egg", &["ב", "צ", "ה"], None),
    (Theme::Food, A34, "גבינה", "גְּבִינָה", "cheese", &["ג", "ב", "נ"], None),
    (Theme::Food, A34, "חמאה", "חֶמְאָה", "butter", &["ח", "מ", "א"], None),
    (Theme::Food, A34, "דבש", "דְּבַשׁ", "honey", &["ד", "ב", "ש"], None),
    (Theme::Food, A34, "שוקולד", "שׁוֹקוֹלָד", "chocolate", &["ש", "ק", "ל", "ד"], None),
    (Theme::Food, A34, "גלידה", "גְּלִידָה", "ice cream", &["ג", "ל", "ד"], None),
    (Theme::Food, A34, "עגבניה", "עַגְבַּנִיָּה", "tomato", &["ע", "ג", "ב", "נ"], None),
    (Theme::Food, A34, "מלפפון", "מְלָפְפוֹן", "cucumber", &["מ", "ל", "פ", "נ"], None),
    (Theme::Food, A34, "גזר", "גֶּזֶר", "carrot", &["ג", "ז", "ר"], None),
    (Theme::Food, A46, "תותים", "תּוּתִים", "strawberries", &["ת", "ו", "ם"], None),
    (Theme::Food, A46, "אבטיח", "אֲבַטִּיחַ", "watermelon", &["א", "ב", "ט", "ח"], None),
    (Theme::Food, A46, "אננס", "אֲנָנָס", "pineapple", &["א", "נ", "ס"], None),
    (Theme::Food, A46, "פיצה", "פִּיצָה", "pizza", &["פ", "צ", "ה"], None),
    (Theme::Food, A46, "המבורגר", "הַמְבּוּרְגֶּר", "hamburger", &["ה", "מ", "ב", "ר", "ג"], None),
    (Theme::Food, A46, "ספגטי", "סְפָּגֶטִי", "spaghetti", &["ס", "פ", "ג", "ט"], None),
    // family
    (Theme::Family, A23, "אבא", "אַבָּא", "dad", &["א", "ב", "א"], None),
    (Theme::Family, A23, "אמא", "אִמָּא", "mom", &["א", "מ", "א"], None),
    (Theme::Family, A23, "תינוק", "תִּינוֹק", "baby", &["ת", "נ", "ק"], None),
    (Theme::Family, A23, "אח", "אָח", "brother", &["א", "ח"], None),
    (Theme::Family, A23, "אחות", "אָחוֹת", "sister", &["א", "ח", "ת"], None),
    (Theme::Family, A34, "סבא", "סָבָא", "grandpa", &["ס", "ב", "א"], None),
    (Theme::Family, A34, "סבתא", "סָבְתָא", "grandma", &["ס", "ב", "ת"], None),
    (Theme::Family, A34, "דוד", "דּוֹד", "uncle", &["ד", "ו", "ד"], None),
    (Theme::Family, A34, "דודה", "דּוֹדָה", "aunt", &["ד", "ו", "ד", "ה"], None),
    (Theme::Family, A34, "בן דוד", "בֶּן דּוֹד", "cousin (m)", &["ב", "נ", "ד"], None),
    (Theme::Family, A46, "משפחה", "מִשְׁפָּחָה", "family", &["מ", "ש", "פ", "ח"], None),
    (Theme::Family, A46, "הורים", "הוֹרִים", "parents", &["ה", "ר", "ם"], None),
    (Theme::Family, A46, "אחים", "אַחִים", "siblings", &["א", "ח", "ם"], None),
    // body parts
    (Theme::BodyParts, A23, "ראש", "רֹאשׁ", "head", &["ר", "ש"], None),
    (Theme::BodyParts, A23, "עין", "עַיִן", "eye", &["ע", "י", "נ"], None),
    (Theme::BodyParts, A23, "אף", "אַף", "nose", &["א", "פ"], None),
    (Theme::BodyParts, A23, "פה", "פֶּה", "mouth", &["פ", "ה"], None),
    (Theme::BodyParts, A23, "יד", "יָד", "hand", &["י", "ד"], None),
    (Theme::BodyParts, A23, "רגל", "רֶגֶל", "leg/foot", &["ר", "ג", "ל"], None),
    (Theme::BodyParts, A34, "אוזן", "אוֹזֶן", "ear", &["א", "ז", "נ"], None),
    (Theme::BodyParts, A34, "שיניים", "שִׁינַּיִים", "teeth", &["ש", "נ", "ם"], None),
    (Theme::BodyParts, A34, "לשון", "לָשׁוֹן", "tongue", &["ל", "ש", "נ"], None),
    (Theme::BodyParts, A34, "בטן", "בֶּטֶן", "belly", &["ב", "ט", "נ"], None),
    (Theme::BodyParts, A34, "גב", "גַּב", "back", &["ג", "ב"], None),
    (Theme::BodyParts, A34, "אצבע", "אֶצְבַּע", "finger", &["א", "צ", "ב", "ע"], None),
    (Theme::BodyParts, A46, "כתף", "כָּתֵף", "shoulder", &["כ", "ת", "פ"], None),
    (Theme::BodyParts, A46, "מרפק", "מַרְפֵּק", "elbow", &["מ", "ר", "פ", "ק"], None),
    (Theme::BodyParts, A46, "ברך", "בֶּרֶךְ", "knee", &["ב", "ר", "כ"], None),
    (Theme::BodyParts, A46, "קרסול", "קַרְסוֹל", "ankle", &["ק", "ר", "ס", "ל"], None),
    // actions
    (Theme::Actions, A23, "אוכל", "אוֹכֵל", "eating", &["א", "כ", "ל"], Some("אכל")),
    (Theme::Actions, A23, "שותה", "שׁוֹתֶה", "drinking", &["ש", "ת", "ה"], Some("שתה")),
    (Theme::Actions, A23, "ישן", "יָשֵׁן", "sleeping", &["י", "ש", "נ"], Some("ישן")),
    (Theme::Actions, A23, "הולך", "הוֹלֵךְ", "walking", &["ה", "ל", "כ"], Some("הלך")),
    (Theme::Actions, A23, "רץ", "רָץ", "running", &["ר", "צ"], Some("רוץ")),
    (Theme::Actions, A34, "קופץ", "קוֹפֵץ", "jumping", &["ק", "פ", "צ"], Some("קפץ")),
    (Theme::Actions, A34, "רוקד", "רוֹקֵד", "dancing", &["ר", "ק", "ד"], Some("רקד")),
    (Theme::Actions, A34, "שר", "שָׁר", "singing", &["ש", "ר"], Some("שיר")),
    (Theme::Actions, A34, "משחק", "מְשַׂחֵק", "playing", &["מ", "ש", "ח", "ק"], Some("שחק")),
    (Theme::Actions, A34, "צובע", "צוֹבֵעַ", "painting/coloring", &["צ", "ב", "ע"], Some("צבע")),
    (Theme::Actions, A34, "בונה", "בּוֹנֶה", "building", &["ב", "נ", "ה"], Some("בנה")),
    (Theme::Actions, A46, "מטפס", "מְטַפֵּס", "climbing", &["מ", "ט", "פ", "ס"], Some("טפס")),
    (Theme::Actions, A46, "שוחה", "שׂוֹחֶה", "swimming", &["ש", "ח", "ה"], Some("שחה")),
    (Theme::Actions, A46, "רוכב", "רוֹכֵב", "riding", &["ר", "כ", "ב"], Some("רכב")),
    (Theme::Actions, A46, "מצייר", "מְצַיֵּיר", "drawing", &["מ", "צ", "י", "ר"], Some("צור")),
    // colors
    (Theme::Colors, A23, "אדום", "אָדוֹם", "red", &["א", "ד", "מ"], None),
    (Theme::Colors, A23, "כחול", "כָּחוֹל", "blue", &["כ", "ח", "ל"], None),
    (Theme::Colors, A23, "צהוב", "צָהוֹב", "yellow", &["צ", "ה", "ב"], None),
    (Theme::Colors, A34, "ירוק", "יָרוֹק", "green", &["י", "ר", "ק"], None),
    (Theme::Colors, A34, "לבן", "לָבָן", "white", &["ל", "ב", "נ"], None),
    (Theme::Colors, A34, "שחור", "שָׁחוֹר", "black", &["ש", "ח", "ר"], None),
    (Theme::Colors, A34, "ורוד", "וָרוֹד", "pink", &["ו", "ר", "ד"], None),
    (Theme::Colors, A34, "כתום", "כָּתוֹם", "orange", &["כ", "ת", "מ"], None),
    (Theme::Colors, A46, "סגול", "סָגוֹל", "purple", &["ס", "ג", "ל"], None),
    (Theme::Colors, A46, "חום", "חוּם", "brown", &["ח", "ו", "מ"], None),
    (Theme::Colors, A46, "אפור", "אָפוֹר", "gray", &["א", "פ", "ר"], None),
    // israeli culture
    (Theme::IsraeliCulture, A23, "חלה", "חַלָּה", "challah bread", &["ח", "ל", "ה"], None),
    (Theme::IsraeliCulture, A23, "שבת", "שַׁבָּת", "Sabbath", &["ש", "ב", "ת"], None),
    (Theme::IsraeliCulture, A34, "חנוכייה", "חֲנוּכִּיָּיה", "Hanukkah menorah", &["ח", "נ", "כ", "י"], None),
    (Theme::IsraeliCulture, A34, "סביבון", "סְבִיבוֹן", "dreidel", &["ס", "ב", "י", "נ"], None),
    (Theme::IsraeliCulture, A34, "חמסה", "חַמְסָה", "hamsa", &["ח", "מ", "ס"], None),
    (Theme::IsraeliCulture, A34, "פלאפל", "פָלָאפֶל", "falafel", &["פ", "ל", "א", "פ", "ל"], None),
    (Theme::IsraeliCulture, A34, "חומוס", "חוּמּוּס", "hummus", &["ח", "מ", "ס"], None),
    (Theme::IsraeliCulture, A46, "ישראל", "יִשְׂרָאֵל", "Israel", &["י", "ש", "ר", "א", "ל"], None),
    (Theme::IsraeliCulture, A46, "ירושלים", "יְרוּשָׁלַיִם", "Jerusalem", &["י", "ר", "ש", "ל", "ם"], None),
    (Theme::IsraeliCulture, A46, "כיפה", "כִּיפָּה", "kippah", &["כ", "י", "פ", "ה"], None),
    // emotions
    (Theme::Emotions, A23, "שמח", "שָׂמֵחַ", "happy", &["ש", "מ", "ח"], None),
    (Theme::Emotions, A23, "עצוב", "עָצוּב", "sad", &["ע", "צ", "ב"], None),
    (Theme::Emotions, A34, "כועס", "כּוֹעֵס", "angry", &["כ", "ע", "ס"], None),
    (Theme::Emotions, A34, "מפחד", "מְפַחֵד", "scared", &["מ", "פ", "ח", "ד"], None),
    (Theme::Emotions, A34, "נרגש", "נִרְגָּשׁ", "excited", &["נ", "ר", "ג", "ש"], None),
    (Theme::Emotions, A46, "מופתע", "מוּפְתָּע", "surprised", &["מ", "פ", "ת", "ע"], None),
    (Theme::Emotions, A46, "גאה", "גֵּאֶה", "proud", &["ג", "א", "ה"], None),
    (Theme::Emotions, A46, "מבולבל", "מְבוּלְבָּל", "confused", &["מ", "ב", "ל", "ב", "ל"], None),
];

pub(crate) const PHONEME_INDEX: &[(&str, &[&str], &[&str], &[&str])] = &[
    (
        "ש",
        &["שולחן", "שמש", "שועל", "שמח", "שר", "שותה", "שחור", "שבת"],
        &["משחק", "ישן", "בושה", "נושא", "משפחה"],
        &["ראש", "שמש", "דש"],
    ),
    (
        "ר",
        &["ראש", "רגל", "רוקד", "רץ", "ריח", "רעב"],
        &["ברווז", "גזר", "פרה", "עגור", "ארנב", "ירוק", "אדום"],
        &["ספר", "כדור", "גשר", "חצר", "נייר"],
    ),
    (
        "צ",
        &["צב", "ציפור", "צבע", "צהוב", "צעצוע"],
        &["אצבע", "מצא", "עצוב"],
        &["ביצה", "רץ", "קופץ", "עץ"],
    ),
    (
        "ל",
        &["לחם", "לשון", "לבן", "לילה", "לב"],
        &["ילד", "כלב", "בלון", "חלב", "חולצה", "מלפפון"],
        &["אוכל", "גדול", "קטן", "סוס", "ציפור"],
    ),
    (
        "כ",
        &["כלב", "כדור", "כחול", "כתום", "כף", "כובע"],
        &["מכונית", "שוקולד", "זוכר", "סוכר"],
        &["הולך", "אוכל", "ספר", "דרך"],
    ),
    (
        "ח",
        &["חתול", "חלב", "חלה", "חום", "חולצה", "חלון"],
        &["שוחה", "פותח", "מפתח"],
        &["תפוח", "לוח", "רוח", "בוקר"],
    ),
];

type PairRow = (&'static str, &'static str, &'static [(&'static str, &'static str, &'static str, &'static str)]);

pub(crate) const MINIMAL_PAIRS: &[PairRow] = &[
    ("ב", "פּ", &[("בַּת", "פַּת", "daughter", "slice"), ("בָּר", "פָּר", "son", "bull")]),
    ("כּ", "ת", &[("כַּד", "תַּד", "pitcher", "peg"), ("כֹּל", "תֹּל", "all", "mound")]),
    ("ש", "ס", &[("שָׂם", "סָם", "put", "drug"), ("שַׁר", "סַר", "sang", "turned")]),
    ("ר", "ל", &[("רָץ", "לָץ", "ran", "jester"), ("רַב", "לַב", "rabbi", "heart")]),
    ("כ", "ח", &[("כַּף", "חַף", "spoon", "innocent"), ("כָּל", "חָל", "ate", "sand")]),
];

type ProcessRow = (&'static str, &'static str, &'static [(&'static str, &'static str)], f32, f32);

pub(crate) const PHONOLOGICAL_PROCESSES: &[ProcessRow] = &[
    ("stopping", "Replacing fricatives with stops", &[("ש", "ת"), ("כ", "ק"), ("ח", "ק")], 2.0, 4.0),
    ("fronting", "Replacing velar/uvular sounds with alveolar", &[("כ", "ת"), ("ק", "ת"), ("ג", "ד")], 2.0, 3.5),
    ("gliding", "Replacing liquids with glides", &[("ר", "י"), ("ל", "י")], 2.0, 5.0),
    ("cluster_reduction", "Simplifying consonant clusters", &[("שמ", "ש"), ("בר", "ב")], 2.0, 4.0),
    ("final_consonant_deletion", "Omitting final consonants", &[("סוס", "סו"), ("חתול", "חתו")], 2.0, 3.0),
];
