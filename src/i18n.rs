// Static two-locale string catalog for user-facing client messages.
//
// Keys are the canonical English phrases. A handful of keys carry a
// `;context` suffix where the same English phrase translates differently
// depending on where it appears (e.g. inside a versus-round result line).

use std::collections::HashMap;
use std::sync::OnceLock;

/// Supported display locales.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English (default and fallback).
    En,
    /// German.
    De,
}

impl Locale {
    /// Canonical locale label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    /// Parses a locale value, tolerant of case and region tags ("de-AT").
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            _ => None,
        }
    }
}

/// Ordered list of supported locales.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::De];

/// Looks up `key` in the catalog of `locale`.
pub fn text(locale: Locale, key: &str) -> Option<&'static str> {
    catalog(locale).get(key).copied()
}

/// Looks up `key`, falling back to English and finally to the key itself.
pub fn text_or_key<'a>(locale: Locale, key: &'a str) -> &'a str {
    text(locale, key)
        .or_else(|| text(Locale::En, key))
        .unwrap_or(key)
}

fn catalog(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static CATALOGS: OnceLock<HashMap<Locale, HashMap<&'static str, &'static str>>> =
        OnceLock::new();
    let catalogs = CATALOGS.get_or_init(|| {
        let mut map = HashMap::new();
        map.insert(Locale::En, EN.iter().copied().collect());
        map.insert(Locale::De, DE.iter().copied().collect());
        map
    });
    // Both variants are inserted above.
    &catalogs[&locale]
}

/// Key/value pairs for a single locale, compiled into the binary.
pub(crate) type Entries = &'static [(&'static str, &'static str)];

pub(crate) const EN: Entries = &[
    ("Something went wrong! Reloading page..", "Something went wrong! Reloading page.."),
    // Shown when a caller passes an empty key.
    ("", "TODO: add text"),
    ("Accept", "Accept"),
    ("This site uses (only functional) cookies!", "This site uses (only functional) cookies!"),
    ("Question", "Question"),
    ("Waiting for players or server synchronization", "Waiting for players or server synchronization"),
    ("Name", "Name"),
    ("Submit", "Submit"),
    ("Name must not be empty!", "Name must not be empty!"),
    ("Loading", "Loading"),
    ("Connection to server failed!", "Connection to server failed!"),
    ("Lobby ID", "Lobby ID"),
    ("Create lobby", "Create lobby"),
    ("Join", "Join"),
    ("Lobby ID must not be empty!", "Lobby ID must not be empty!"),
    ("Join lobby", "Join lobby"),
    ("Lobby ID was not found!", "Lobby ID was not found!"),
    ("Lobby open for new players", "Lobby open for new players"),
    ("Admin also plays", "Admin also plays"),
    ("Lobby open while playing", "Lobby open while playing"),
    ("Start game", "Start game"),
    ("Invite link", "Invite link"),
    ("Initial money", "Initial money"),
    ("Jokers", "Jokers"),
    ("Normal question reward", "Normal question reward"),
    ("Estimation question reward", "Estimation question reward"),
    ("Copy", "Copy"),
    ("Question set", "Question set"),
    ("Select one", "Select one"),
    ("Custom", "Custom"),
    ("Download example", "Download example file"),
    ("Select file", "Select file"),
    ("File is too large!", "File is too large!"),
    ("Questions uploaded!", "Questions uploaded!"),
    ("Invalid JSON!", "Invalid JSON!"),
    ("Upload error!", "Upload error!"),
    ("Load questions before you start the game!", "Load questions before you start the game!"),
    ("Game settings out of sync, please wait!", "Game settings out of sync, please wait!"),
    ("Lobby is closed!", "Lobby is closed!"),
    ("Players", "Players"),
    ("None", "None"),
    ("Edit player", "Edit player"),
    ("Money", "Money"),
    ("Save", "Save"),
    ("Kick", "Kick"),
    (
        "If you answer wrongly, you pay the bet money, otherwise you get the bet money!",
        "If you answer wrongly, you pay the bet money, otherwise you get the bet money!",
    ),
    ("Bet money for the question", "Bet money for the question"),
    ("Question category", "Question category"),
    ("<Amount>", "<Amount>"),
    ("You must bet money!", "You must bet money!"),
    ("Next question", "Next question"),
    ("Back to menu", "Back to menu"),
    ("Force to go on", "Force to go on"),
    ("Invalid bet! Must be > 1 and <= your money!", "Invalid bet! Must be > 1 and <= your money!"),
    ("Attack a fellow player", "Attack a fellow player"),
    (
        "If you answer correctly, your enemy's money is halved! But else it is doubled!",
        "If you answer correctly, your enemy's money is halved! But else it is doubled!",
    ),
    ("Select a player", "Select a player"),
    ("You must select a player!", "You must select a player!"),
    ("Enter your estimation", "Enter your estimation"),
    ("<Estimation>", "<Estimation>"),
    ("Enter your estimation first!", "Enter your estimation first!"),
    ("Estimation must be at least 1!", "Estimation must be at least 1!"),
    ("Correct answer", "Correct answer"),
    ("Nothing", "Nothing"),
    ("The Players' Answers", "The Players' Answers"),
    ("bets", "bets"),
    ("and assumes it is", "and assumes it is"),
    ("attacks;results-vs", "attacks"),
    ("Nobody", "Nobody"),
    ("and assumes it is;results-vs", "and assumes it is"),
    ("assumes it is", "assumes it is"),
    ("says", "says"),
    ("Name is too long! At most 25 characters!", "Name is too long! At most 25 characters!"),
];

pub(crate) const DE: Entries = &[
    ("Something went wrong! Reloading page..", "Etwas ist schief gelaufen! Seite wird neu geladen.."),
    ("", "TODO: Text hinzufügen"),
    ("Accept", "Akzeptieren"),
    ("This site uses (only functional) cookies!", "Diese Seite benutzt (nur funktionale) Cookies!"),
    ("Question", "Frage"),
    ("Waiting for players or server synchronization", "Warte auf Mitspieler oder Synchronisation mit dem Server"),
    ("Name", "Name"),
    ("Submit", "Absenden"),
    ("Name must not be empty!", "Name darf nicht leer sein!"),
    ("Loading", "Lädt"),
    ("Connection to server failed!", "Verbindung zum Server fehlgeschlagen!"),
    ("Lobby ID", "Lobby ID"),
    ("Create lobby", "Lobby erstellen"),
    ("Join", "Beitreten"),
    ("Lobby ID must not be empty!", "Lobby ID darf nicht leer sein!"),
    ("Join lobby", "Lobby beitreten"),
    ("Lobby ID was not found!", "Lobby ID wurde nicht gefunden!"),
    ("Lobby open for new players", "Lobby offen für neue Spieler"),
    ("Admin also plays", "Admin spielt auch mit"),
    ("Lobby open while playing", "Lobby offen während des Spielens"),
    ("Start game", "Spiel starten"),
    ("Invite link", "Einladungslink"),
    ("Initial money", "Geld zu Beginn"),
    ("Jokers", "Anzahl Joker"),
    ("Normal question reward", "Belohnung für normale Fragen"),
    ("Estimation question reward", "Belohnung für Schätzfragen"),
    ("Copy", "Kopieren"),
    ("Question set", "Fragenkatalog"),
    ("Select one", "Wähle aus"),
    ("Custom", "Eigene"),
    ("Download example", "Downloade Beispieldatei"),
    ("Select file", "Datei auswählen"),
    ("File is too large!", "Datei ist zu groß!"),
    ("Questions uploaded!", "Fragen hochgeladen!"),
    ("Invalid JSON!", "Fehlerhafte JSON!"),
    ("Upload error!", "Uploadfehler!"),
    ("Load questions before you start the game!", "Lade die Fragen vor dem Spielstart!"),
    ("Game settings out of sync, please wait!", "Spieleinstellungen nicht synchron zum Server, bitte warten!"),
    ("Lobby is closed!", "Lobby ist geschlossen!"),
    ("Players", "Spieler"),
    ("None", "Keins"),
    ("Edit player", "Spieler bearbeiten"),
    ("Money", "Geld"),
    ("Save", "Speichern"),
    ("Kick", "Kicken"),
    (
        "If you answer wrongly, you pay the bet money, otherwise you get the bet money!",
        "Wenn du falsch antwortest, wird deine Wette abgezogen, sonst zu deinem Betrag dazu addiert!",
    ),
    ("Bet money for the question", "Setze Geld für die Frage"),
    ("Question category", "Fragenkategorie"),
    ("<Amount>", "<Betrag>"),
    ("You must bet money!", "Es muss Geld gesetzt werden!"),
    ("Next question", "Nächste Frage"),
    ("Back to menu", "Zurück zum Menü"),
    ("Force to go on", "Vorzeitig fortfahren"),
    ("Invalid bet! Must be > 1 and <= your money!", "Falscher Einsatz! Einsatz muss > 1 und <= deinem Geld sein!"),
    ("Attack a fellow player", "Attackiere einen Mitspieler"),
    (
        "If you answer correctly, your enemy's money is halved! But else it is doubled!",
        "Wenn du richtig antwortest, wird das Geld des Gegners halbiert! Aber wenn nicht, dann wird es verdoppelt!",
    ),
    ("Select a player", "Wähle einen Spieler aus"),
    ("You must select a player!", "Es muss ein Spieler ausgewählt werden!"),
    ("Enter your estimation", "Gib deine Schätzung ab"),
    ("<Estimation>", "<Schätzung>"),
    ("Enter your estimation first!", "Gib deine Schätzung zuerst ein!"),
    ("Estimation must be at least 1!", "Schätzung muss mindesten 1 sein!"),
    ("Correct answer", "Richtige Antwort"),
    ("Nothing", "Nichts"),
    ("The Players' Answers", "Antworten der Spieler"),
    ("bets", "wettet"),
    ("and assumes it is", "und tippt auf"),
    ("attacks;results-vs", "greift"),
    ("Nobody", "Niemand"),
    ("and assumes it is;results-vs", "an und tippt auf"),
    ("assumes it is", "tippt auf"),
    ("says", "sagt"),
    ("Name is too long! At most 25 characters!", "Name ist zu lang! Maximal 25 Zeichen sind erlaubt!"),
];
