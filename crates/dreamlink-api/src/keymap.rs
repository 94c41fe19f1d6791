// Remote-control key code tables.
//
// The box's /web/remotecontrol endpoint takes Linux input-event key
// codes. Two read-only tables cover it: the primary table holds the
// named keys of the stock remote (exposed as simple commands), and the
// extended table holds the full low-level keyboard/multimedia range,
// reachable only through raw numeric or extended symbolic lookup.
//
// Every primary name also accepts a `<NAME>_LONG` variant: same code,
// long-press semantics signaled through the request's `type=long`
// query modifier. The suffix is handled by the caller, not here.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Named keys of the stock remote, in keypad order.
const PRIMARY_KEYS: &[(&str, u32)] = &[
    ("POWER", 116),
    ("1", 2),
    ("2", 3),
    ("3", 4),
    ("4", 5),
    ("5", 6),
    ("6", 7),
    ("7", 8),
    ("8", 9),
    ("9", 10),
    ("0", 11),
    ("PREVIOUS", 412),
    ("NEXT", 407),
    ("VOLUME_UP", 115),
    ("VOLUME_DOWN", 114),
    ("MUTE", 113),
    ("BOUQUET_UP", 402),
    ("BOUQUET_DOWN", 403),
    ("BACK", 174),
    ("INFO", 358),
    ("CURSOR_UP", 103),
    ("CURSOR_DOWN", 108),
    ("CURSOR_LEFT", 105),
    ("CURSOR_RIGHT", 106),
    ("MENU", 139),
    ("OK", 352),
    ("HELP", 138),
    ("AUDIO", 392),
    ("VIDEO", 393),
    ("RED", 398),
    ("GREEN", 399),
    ("YELLOW", 400),
    ("BLUE", 401),
    ("REWIND", 165),
    ("PLAY", 207),
    ("STOP", 128),
    ("FORWARD", 163),
    ("TV", 377),
    ("RADIO", 385),
    ("TEXT", 388),
    ("RECORD", 167),
];

/// Low-level input-event codes (KEY_* names from linux/input-event-codes.h).
const EXTENDED_KEYS: &[(&str, u32)] = &[
    ("KEY_ESC", 1),
    ("KEY_1", 2),
    ("KEY_2", 3),
    ("KEY_3", 4),
    ("KEY_4", 5),
    ("KEY_5", 6),
    ("KEY_6", 7),
    ("KEY_7", 8),
    ("KEY_8", 9),
    ("KEY_9", 10),
    ("KEY_0", 11),
    ("KEY_MINUS", 12),
    ("KEY_EQUAL", 13),
    ("KEY_BACKSPACE", 14),
    ("KEY_TAB", 15),
    ("KEY_Q", 16),
    ("KEY_W", 17),
    ("KEY_E", 18),
    ("KEY_R", 19),
    ("KEY_T", 20),
    ("KEY_Y", 21),
    ("KEY_U", 22),
    ("KEY_I", 23),
    ("KEY_O", 24),
    ("KEY_P", 25),
    ("KEY_LEFTBRACE", 26),
    ("KEY_RIGHTBRACE", 27),
    ("KEY_ENTER", 28),
    ("KEY_LEFTCTRL", 29),
    ("KEY_A", 30),
    ("KEY_S", 31),
    ("KEY_D", 32),
    ("KEY_F", 33),
    ("KEY_G", 34),
    ("KEY_H", 35),
    ("KEY_J", 36),
    ("KEY_K", 37),
    ("KEY_L", 38),
    ("KEY_SEMICOLON", 39),
    ("KEY_APOSTROPHE", 40),
    ("KEY_GRAVE", 41),
    ("KEY_LEFTSHIFT", 42),
    ("KEY_BACKSLASH", 43),
    ("KEY_Z", 44),
    ("KEY_X", 45),
    ("KEY_C", 46),
    ("KEY_V", 47),
    ("KEY_B", 48),
    ("KEY_N", 49),
    ("KEY_M", 50),
    ("KEY_COMMA", 51),
    ("KEY_DOT", 52),
    ("KEY_SLASH", 53),
    ("KEY_RIGHTSHIFT", 54),
    ("KEY_KPASTERISK", 55),
    ("KEY_LEFTALT", 56),
    ("KEY_SPACE", 57),
    ("KEY_CAPSLOCK", 58),
    ("KEY_F1", 59),
    ("KEY_F2", 60),
    ("KEY_F3", 61),
    ("KEY_F4", 62),
    ("KEY_F5", 63),
    ("KEY_F6", 64),
    ("KEY_F7", 65),
    ("KEY_F8", 66),
    ("KEY_F9", 67),
    ("KEY_F10", 68),
    ("KEY_NUMLOCK", 69),
    ("KEY_SCROLLLOCK", 70),
    ("KEY_KP7", 71),
    ("KEY_KP8", 72),
    ("KEY_KP9", 73),
    ("KEY_KPMINUS", 74),
    ("KEY_KP4", 75),
    ("KEY_KP5", 76),
    ("KEY_KP6", 77),
    ("KEY_KPPLUS", 78),
    ("KEY_KP1", 79),
    ("KEY_KP2", 80),
    ("KEY_KP3", 81),
    ("KEY_KP0", 82),
    ("KEY_KPDOT", 83),
    ("KEY_F11", 87),
    ("KEY_F12", 88),
    ("KEY_KPENTER", 96),
    ("KEY_RIGHTCTRL", 97),
    ("KEY_KPSLASH", 98),
    ("KEY_SYSRQ", 99),
    ("KEY_RIGHTALT", 100),
    ("KEY_HOME", 102),
    ("KEY_UP", 103),
    ("KEY_PAGEUP", 104),
    ("KEY_LEFT", 105),
    ("KEY_RIGHT", 106),
    ("KEY_END", 107),
    ("KEY_DOWN", 108),
    ("KEY_PAGEDOWN", 109),
    ("KEY_INSERT", 110),
    ("KEY_DELETE", 111),
    ("KEY_MUTE", 113),
    ("KEY_VOLUMEDOWN", 114),
    ("KEY_VOLUMEUP", 115),
    ("KEY_POWER", 116),
    ("KEY_KPEQUAL", 117),
    ("KEY_PAUSE", 119),
    ("KEY_KPCOMMA", 121),
    ("KEY_COMPOSE", 127),
    ("KEY_STOP", 128),
    ("KEY_AGAIN", 129),
    ("KEY_PROPS", 130),
    ("KEY_UNDO", 131),
    ("KEY_FRONT", 132),
    ("KEY_COPY", 133),
    ("KEY_OPEN", 134),
    ("KEY_PASTE", 135),
    ("KEY_FIND", 136),
    ("KEY_CUT", 137),
    ("KEY_HELP", 138),
    ("KEY_MENU", 139),
    ("KEY_CALC", 140),
    ("KEY_SETUP", 141),
    ("KEY_SLEEP", 142),
    ("KEY_WAKEUP", 143),
    ("KEY_FILE", 144),
    ("KEY_SENDFILE", 145),
    ("KEY_DELETEFILE", 146),
    ("KEY_XFER", 147),
    ("KEY_PROG1", 148),
    ("KEY_PROG2", 149),
    ("KEY_WWW", 150),
    ("KEY_COFFEE", 152),
    ("KEY_ROTATE_DISPLAY", 153),
    ("KEY_CYCLEWINDOWS", 154),
    ("KEY_MAIL", 155),
    ("KEY_BOOKMARKS", 156),
    ("KEY_COMPUTER", 157),
    ("KEY_BACK", 158),
    ("KEY_FORWARD", 159),
    ("KEY_CLOSECD", 160),
    ("KEY_EJECTCD", 161),
    ("KEY_EJECTCLOSECD", 162),
    ("KEY_NEXTSONG", 163),
    ("KEY_PLAYPAUSE", 164),
    ("KEY_PREVIOUSSONG", 165),
    ("KEY_STOPCD", 166),
    ("KEY_RECORD", 167),
    ("KEY_REWIND", 168),
    ("KEY_PHONE", 169),
    ("KEY_CONFIG", 171),
    ("KEY_HOMEPAGE", 172),
    ("KEY_REFRESH", 173),
    ("KEY_EXIT", 174),
    ("KEY_MOVE", 175),
    ("KEY_EDIT", 176),
    ("KEY_SCROLLUP", 177),
    ("KEY_SCROLLDOWN", 178),
    ("KEY_KPLEFTPAREN", 179),
    ("KEY_KPRIGHTPAREN", 180),
    ("KEY_NEW", 181),
    ("KEY_REDO", 182),
    ("KEY_F13", 183),
    ("KEY_F14", 184),
    ("KEY_F15", 185),
    ("KEY_F16", 186),
    ("KEY_F17", 187),
    ("KEY_F18", 188),
    ("KEY_F19", 189),
    ("KEY_F20", 190),
    ("KEY_F21", 191),
    ("KEY_F22", 192),
    ("KEY_F23", 193),
    ("KEY_F24", 194),
    ("KEY_PLAYCD", 200),
    ("KEY_PAUSECD", 201),
    ("KEY_PROG3", 202),
    ("KEY_PROG4", 203),
    ("KEY_SUSPEND", 205),
    ("KEY_CLOSE", 206),
    ("KEY_PLAY", 207),
    ("KEY_FASTFORWARD", 208),
    ("KEY_BASSBOOST", 209),
    ("KEY_PRINT", 210),
    ("KEY_HP", 211),
    ("KEY_CAMERA", 212),
    ("KEY_SOUND", 213),
    ("KEY_QUESTION", 214),
    ("KEY_EMAIL", 215),
    ("KEY_CHAT", 216),
    ("KEY_SEARCH", 217),
    ("KEY_CONNECT", 218),
    ("KEY_FINANCE", 219),
    ("KEY_SPORT", 220),
    ("KEY_SHOP", 221),
    ("KEY_ALTERASE", 222),
    ("KEY_CANCEL", 223),
    ("KEY_BRIGHTNESSDOWN", 224),
    ("KEY_BRIGHTNESSUP", 225),
    ("KEY_MEDIA", 226),
    ("KEY_SWITCHVIDEOMODE", 227),
    ("KEY_KBDILLUMTOGGLE", 228),
    ("KEY_KBDILLUMDOWN", 229),
    ("KEY_KBDILLUMUP", 230),
    ("KEY_SEND", 231),
    ("KEY_REPLY", 232),
    ("KEY_FORWARDMAIL", 233),
    ("KEY_SAVE", 234),
    ("KEY_DOCUMENTS", 235),
    ("KEY_BATTERY", 236),
    ("KEY_BLUETOOTH", 237),
    ("KEY_WLAN", 238),
    ("KEY_UWB", 239),
    ("KEY_UNKNOWN", 240),
    ("KEY_VIDEO_NEXT", 241),
    ("KEY_VIDEO_PREV", 242),
    ("KEY_BRIGHTNESS_CYCLE", 243),
    ("KEY_BRIGHTNESS_AUTO", 244),
    ("KEY_DISPLAY_OFF", 245),
    ("KEY_WWAN", 246),
    ("KEY_RFKILL", 247),
    ("KEY_MICMUTE", 248),
    ("KEY_OK", 352),
    ("KEY_SELECT", 353),
    ("KEY_GOTO", 354),
    ("KEY_CLEAR", 355),
    ("KEY_POWER2", 356),
    ("KEY_OPTION", 357),
    ("KEY_INFO", 358),
    ("KEY_TIME", 359),
    ("KEY_VENDOR", 360),
    ("KEY_ARCHIVE", 361),
    ("KEY_PROGRAM", 362),
    ("KEY_CHANNEL", 363),
    ("KEY_FAVORITES", 364),
    ("KEY_EPG", 365),
    ("KEY_PVR", 366),
    ("KEY_MHP", 367),
    ("KEY_LANGUAGE", 368),
    ("KEY_TITLE", 369),
    ("KEY_SUBTITLE", 370),
    ("KEY_ANGLE", 371),
    ("KEY_FULL_SCREEN", 372),
    ("KEY_MODE", 373),
    ("KEY_KEYBOARD", 374),
    ("KEY_ASPECT_RATIO", 375),
    ("KEY_PC", 376),
    ("KEY_TV", 377),
    ("KEY_TV2", 378),
    ("KEY_VCR", 379),
    ("KEY_VCR2", 380),
    ("KEY_SAT", 381),
    ("KEY_SAT2", 382),
    ("KEY_CD", 383),
    ("KEY_TAPE", 384),
    ("KEY_RADIO", 385),
    ("KEY_TUNER", 386),
    ("KEY_PLAYER", 387),
    ("KEY_TEXT", 388),
    ("KEY_DVD", 389),
    ("KEY_AUX", 390),
    ("KEY_MP3", 391),
    ("KEY_AUDIO", 392),
    ("KEY_VIDEO", 393),
    ("KEY_DIRECTORY", 394),
    ("KEY_LIST", 395),
    ("KEY_MEMO", 396),
    ("KEY_CALENDAR", 397),
    ("KEY_RED", 398),
    ("KEY_GREEN", 399),
    ("KEY_YELLOW", 400),
    ("KEY_BLUE", 401),
    ("KEY_CHANNELUP", 402),
    ("KEY_CHANNELDOWN", 403),
    ("KEY_FIRST", 404),
    ("KEY_LAST", 405),
    ("KEY_AB", 406),
    ("KEY_NEXT", 407),
    ("KEY_RESTART", 408),
    ("KEY_SLOW", 409),
    ("KEY_SHUFFLE", 410),
    ("KEY_BREAK", 411),
    ("KEY_PREVIOUS", 412),
    ("KEY_DIGITS", 413),
    ("KEY_TEEN", 414),
    ("KEY_TWEN", 415),
    ("KEY_VIDEOPHONE", 416),
    ("KEY_GAMES", 417),
    ("KEY_ZOOMIN", 418),
    ("KEY_ZOOMOUT", 419),
    ("KEY_ZOOMRESET", 420),
    ("KEY_WORDPROCESSOR", 421),
    ("KEY_EDITOR", 422),
    ("KEY_SPREADSHEET", 423),
    ("KEY_GRAPHICSEDITOR", 424),
    ("KEY_PRESENTATION", 425),
    ("KEY_DATABASE", 426),
    ("KEY_NEWS", 427),
    ("KEY_VOICEMAIL", 428),
    ("KEY_ADDRESSBOOK", 429),
    ("KEY_MESSENGER", 430),
    ("KEY_DISPLAYTOGGLE", 431),
    ("KEY_SPELLCHECK", 432),
    ("KEY_LOGOFF", 433),
];

static PRIMARY: LazyLock<HashMap<&'static str, u32>> =
    LazyLock::new(|| PRIMARY_KEYS.iter().copied().collect());

static EXTENDED: LazyLock<HashMap<&'static str, u32>> =
    LazyLock::new(|| EXTENDED_KEYS.iter().copied().collect());

/// Look up a primary (stock-remote) key name.
pub fn lookup(name: &str) -> Option<u32> {
    PRIMARY.get(name).copied()
}

/// Look up an extended low-level `KEY_*` name.
pub fn lookup_extended(name: &str) -> Option<u32> {
    EXTENDED.get(name).copied()
}

/// Primary key names, in keypad order.
pub fn primary_names() -> impl Iterator<Item = &'static str> {
    PRIMARY_KEYS.iter().map(|(name, _)| *name)
}

/// Extended key names, in code order.
pub fn extended_names() -> impl Iterator<Item = &'static str> {
    EXTENDED_KEYS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_lookup_is_stable() {
        for (name, code) in PRIMARY_KEYS {
            assert_eq!(lookup(name), Some(*code));
            assert_eq!(lookup(name), Some(*code));
        }
        assert_eq!(lookup("POWER"), Some(116));
        assert_eq!(lookup("VOLUME_UP"), Some(115));
        assert_eq!(lookup("NO_SUCH_KEY"), None);
    }

    #[test]
    fn tables_have_no_duplicate_names() {
        assert_eq!(PRIMARY.len(), PRIMARY_KEYS.len());
        assert_eq!(EXTENDED.len(), EXTENDED_KEYS.len());
    }

    #[test]
    fn extended_is_not_reachable_via_primary_lookup() {
        assert_eq!(lookup("KEY_EPG"), None);
        assert_eq!(lookup_extended("KEY_EPG"), Some(365));
        assert_eq!(lookup_extended("POWER"), None);
    }
}
