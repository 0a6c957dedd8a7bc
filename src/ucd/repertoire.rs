// Generated from the Unicode Character Database 14.0.0. Do not edit by hand.

use super::c;
use crate::tables::CharEntry;

/// Assigned characters, sorted by first code point.
///
/// Fields: first code point, last code point (ranges only), name, attribute bits, block alias.
pub static REPERTOIRE: &[CharEntry] = &[
    c(0x0000, None, "NULL", 0x00, "ASCII"),
    c(0x0001, None, "START OF HEADING", 0x00, "ASCII"),
    c(0x0002, None, "START OF TEXT", 0x00, "ASCII"),
    c(0x0003, None, "END OF TEXT", 0x00, "ASCII"),
    c(0x0004, None, "END OF TRANSMISSION", 0x00, "ASCII"),
    c(0x0005, None, "ENQUIRY", 0x00, "ASCII"),
    c(0x0006, None, "ACKNOWLEDGE", 0x00, "ASCII"),
    c(0x0007, None, "ALERT", 0x00, "ASCII"),
    c(0x0008, None, "BACKSPACE", 0x00, "ASCII"),
    c(0x0009, None, "CHARACTER TABULATION", 0x00, "ASCII"),
    c(0x000A, None, "LINE FEED", 0x00, "ASCII"),
    c(0x000B, None, "LINE TABULATION", 0x00, "ASCII"),
    c(0x000C, None, "FORM FEED", 0x00, "ASCII"),
    c(0x000D, None, "CARRIAGE RETURN", 0x00, "ASCII"),
    c(0x000E, None, "SHIFT OUT", 0x00, "ASCII"),
    c(0x000F, None, "SHIFT IN", 0x00, "ASCII"),
    c(0x0010, None, "DATA LINK ESCAPE", 0x00, "ASCII"),
    c(0x0011, None, "DEVICE CONTROL ONE", 0x00, "ASCII"),
    c(0x0012, None, "DEVICE CONTROL TWO", 0x00, "ASCII"),
    c(0x0013, None, "DEVICE CONTROL THREE", 0x00, "ASCII"),
    c(0x0014, None, "DEVICE CONTROL FOUR", 0x00, "ASCII"),
    c(0x0015, None, "NEGATIVE ACKNOWLEDGE", 0x00, "ASCII"),
    c(0x0016, None, "SYNCHRONOUS IDLE", 0x00, "ASCII"),
    c(0x0017, None, "END OF TRANSMISSION BLOCK", 0x00, "ASCII"),
    c(0x0018, None, "CANCEL", 0x00, "ASCII"),
    c(0x0019, None, "END OF MEDIUM", 0x00, "ASCII"),
    c(0x001A, None, "SUBSTITUTE", 0x00, "ASCII"),
    c(0x001B, None, "ESCAPE", 0x00, "ASCII"),
    c(0x001C, None, "INFORMATION SEPARATOR FOUR", 0x00, "ASCII"),
    c(0x001D, None, "INFORMATION SEPARATOR THREE", 0x00, "ASCII"),
    c(0x001E, None, "INFORMATION SEPARATOR TWO", 0x00, "ASCII"),
    c(0x001F, None, "INFORMATION SEPARATOR ONE", 0x00, "ASCII"),
    c(0x0020, None, "SPACE", 0x00, "ASCII"),
    c(0x0021, None, "EXCLAMATION MARK", 0x00, "ASCII"),
    c(0x0022, None, "QUOTATION MARK", 0x00, "ASCII"),
    c(0x0023, None, "NUMBER SIGN", 0x00, "ASCII"),
    c(0x0024, None, "DOLLAR SIGN", 0x00, "ASCII"),
    c(0x0025, None, "PERCENT SIGN", 0x00, "ASCII"),
    c(0x0026, None, "AMPERSAND", 0x00, "ASCII"),
    c(0x0027, None, "APOSTROPHE", 0x00, "ASCII"),
    c(0x0028, None, "LEFT PARENTHESIS", 0x00, "ASCII"),
    c(0x0029, None, "RIGHT PARENTHESIS", 0x00, "ASCII"),
    c(0x002A, None, "ASTERISK", 0x00, "ASCII"),
    c(0x002B, None, "PLUS SIGN", 0x02, "ASCII"),
    c(0x002C, None, "COMMA", 0x00, "ASCII"),
    c(0x002D, None, "HYPHEN-MINUS", 0x00, "ASCII"),
    c(0x002E, None, "FULL STOP", 0x00, "ASCII"),
    c(0x002F, None, "SOLIDUS", 0x00, "ASCII"),
    c(0x0030, None, "DIGIT ZERO", 0x20, "ASCII"),
    c(0x0031, None, "DIGIT ONE", 0x20, "ASCII"),
    c(0x0032, None, "DIGIT TWO", 0x20, "ASCII"),
    c(0x0033, None, "DIGIT THREE", 0x20, "ASCII"),
    c(0x0034, None, "DIGIT FOUR", 0x20, "ASCII"),
    c(0x0035, None, "DIGIT FIVE", 0x20, "ASCII"),
    c(0x0036, None, "DIGIT SIX", 0x20, "ASCII"),
    c(0x0037, None, "DIGIT SEVEN", 0x20, "ASCII"),
    c(0x0038, None, "DIGIT EIGHT", 0x20, "ASCII"),
    c(0x0039, None, "DIGIT NINE", 0x20, "ASCII"),
    c(0x003A, None, "COLON", 0x00, "ASCII"),
    c(0x003B, None, "SEMICOLON", 0x00, "ASCII"),
    c(0x003C, None, "LESS-THAN SIGN", 0x02, "ASCII"),
    c(0x003D, None, "EQUALS SIGN", 0x02, "ASCII"),
    c(0x003E, None, "GREATER-THAN SIGN", 0x02, "ASCII"),
    c(0x003F, None, "QUESTION MARK", 0x00, "ASCII"),
    c(0x0040, None, "COMMERCIAL AT", 0x00, "ASCII"),
    c(0x0041, None, "LATIN CAPITAL LETTER A", 0x31, "ASCII"),
    c(0x0042, None, "LATIN CAPITAL LETTER B", 0x31, "ASCII"),
    c(0x0043, None, "LATIN CAPITAL LETTER C", 0x31, "ASCII"),
    c(0x0044, None, "LATIN CAPITAL LETTER D", 0x31, "ASCII"),
    c(0x0045, None, "LATIN CAPITAL LETTER E", 0x31, "ASCII"),
    c(0x0046, None, "LATIN CAPITAL LETTER F", 0x31, "ASCII"),
    c(0x0047, None, "LATIN CAPITAL LETTER G", 0x31, "ASCII"),
    c(0x0048, None, "LATIN CAPITAL LETTER H", 0x31, "ASCII"),
    c(0x0049, None, "LATIN CAPITAL LETTER I", 0x31, "ASCII"),
    c(0x004A, None, "LATIN CAPITAL LETTER J", 0x31, "ASCII"),
    c(0x004B, None, "LATIN CAPITAL LETTER K", 0x31, "ASCII"),
    c(0x004C, None, "LATIN CAPITAL LETTER L", 0x31, "ASCII"),
    c(0x004D, None, "LATIN CAPITAL LETTER M", 0x31, "ASCII"),
    c(0x004E, None, "LATIN CAPITAL LETTER N", 0x31, "ASCII"),
    c(0x004F, None, "LATIN CAPITAL LETTER O", 0x31, "ASCII"),
    c(0x0050, None, "LATIN CAPITAL LETTER P", 0x31, "ASCII"),
    c(0x0051, None, "LATIN CAPITAL LETTER Q", 0x31, "ASCII"),
    c(0x0052, None, "LATIN CAPITAL LETTER R", 0x31, "ASCII"),
    c(0x0053, None, "LATIN CAPITAL LETTER S", 0x31, "ASCII"),
    c(0x0054, None, "LATIN CAPITAL LETTER T", 0x31, "ASCII"),
    c(0x0055, None, "LATIN CAPITAL LETTER U", 0x31, "ASCII"),
    c(0x0056, None, "LATIN CAPITAL LETTER V", 0x31, "ASCII"),
    c(0x0057, None, "LATIN CAPITAL LETTER W", 0x31, "ASCII"),
    c(0x0058, None, "LATIN CAPITAL LETTER X", 0x31, "ASCII"),
    c(0x0059, None, "LATIN CAPITAL LETTER Y", 0x31, "ASCII"),
    c(0x005A, None, "LATIN CAPITAL LETTER Z", 0x31, "ASCII"),
    c(0x005B, None, "LEFT SQUARE BRACKET", 0x00, "ASCII"),
    c(0x005C, None, "REVERSE SOLIDUS", 0x00, "ASCII"),
    c(0x005D, None, "RIGHT SQUARE BRACKET", 0x00, "ASCII"),
    c(0x005E, None, "CIRCUMFLEX ACCENT", 0x02, "ASCII"),
    c(0x005F, None, "LOW LINE", 0x20, "ASCII"),
    c(0x0060, None, "GRAVE ACCENT", 0x00, "ASCII"),
    c(0x0061, None, "LATIN SMALL LETTER A", 0x31, "ASCII"),
    c(0x0062, None, "LATIN SMALL LETTER B", 0x31, "ASCII"),
    c(0x0063, None, "LATIN SMALL LETTER C", 0x31, "ASCII"),
    c(0x0064, None, "LATIN SMALL LETTER D", 0x31, "ASCII"),
    c(0x0065, None, "LATIN SMALL LETTER E", 0x31, "ASCII"),
    c(0x0066, None, "LATIN SMALL LETTER F", 0x31, "ASCII"),
    c(0x0067, None, "LATIN SMALL LETTER G", 0x31, "ASCII"),
    c(0x0068, None, "LATIN SMALL LETTER H", 0x31, "ASCII"),
    c(0x0069, None, "LATIN SMALL LETTER I", 0x31, "ASCII"),
    c(0x006A, None, "LATIN SMALL LETTER J", 0x31, "ASCII"),
    c(0x006B, None, "LATIN SMALL LETTER K", 0x31, "ASCII"),
    c(0x006C, None, "LATIN SMALL LETTER L", 0x31, "ASCII"),
    c(0x006D, None, "LATIN SMALL LETTER M", 0x31, "ASCII"),
    c(0x006E, None, "LATIN SMALL LETTER N", 0x31, "ASCII"),
    c(0x006F, None, "LATIN SMALL LETTER O", 0x31, "ASCII"),
    c(0x0070, None, "LATIN SMALL LETTER P", 0x31, "ASCII"),
    c(0x0071, None, "LATIN SMALL LETTER Q", 0x31, "ASCII"),
    c(0x0072, None, "LATIN SMALL LETTER R", 0x31, "ASCII"),
    c(0x0073, None, "LATIN SMALL LETTER S", 0x31, "ASCII"),
    c(0x0074, None, "LATIN SMALL LETTER T", 0x31, "ASCII"),
    c(0x0075, None, "LATIN SMALL LETTER U", 0x31, "ASCII"),
    c(0x0076, None, "LATIN SMALL LETTER V", 0x31, "ASCII"),
    c(0x0077, None, "LATIN SMALL LETTER W", 0x31, "ASCII"),
    c(0x0078, None, "LATIN SMALL LETTER X", 0x31, "ASCII"),
    c(0x0079, None, "LATIN SMALL LETTER Y", 0x31, "ASCII"),
    c(0x007A, None, "LATIN SMALL LETTER Z", 0x31, "ASCII"),
    c(0x007B, None, "LEFT CURLY BRACKET", 0x00, "ASCII"),
    c(0x007C, None, "VERTICAL LINE", 0x02, "ASCII"),
    c(0x007D, None, "RIGHT CURLY BRACKET", 0x00, "ASCII"),
    c(0x007E, None, "TILDE", 0x02, "ASCII"),
    c(0x007F, None, "DELETE", 0x00, "ASCII"),
    c(0x0080, None, "PADDING CHARACTER", 0x00, "Latin_1_Sup"),
    c(0x0081, None, "HIGH OCTET PRESET", 0x00, "Latin_1_Sup"),
    c(0x0082, None, "BREAK PERMITTED HERE", 0x00, "Latin_1_Sup"),
    c(0x0083, None, "NO BREAK HERE", 0x00, "Latin_1_Sup"),
    c(0x0084, None, "INDEX", 0x00, "Latin_1_Sup"),
    c(0x0085, None, "NEXT LINE", 0x00, "Latin_1_Sup"),
    c(0x0086, None, "START OF SELECTED AREA", 0x00, "Latin_1_Sup"),
    c(0x0087, None, "END OF SELECTED AREA", 0x00, "Latin_1_Sup"),
    c(0x0088, None, "CHARACTER TABULATION SET", 0x00, "Latin_1_Sup"),
    c(0x0089, None, "CHARACTER TABULATION WITH JUSTIFICATION", 0x00, "Latin_1_Sup"),
    c(0x008A, None, "LINE TABULATION SET", 0x00, "Latin_1_Sup"),
    c(0x008B, None, "PARTIAL LINE FORWARD", 0x00, "Latin_1_Sup"),
    c(0x008C, None, "PARTIAL LINE BACKWARD", 0x00, "Latin_1_Sup"),
    c(0x008D, None, "REVERSE LINE FEED", 0x00, "Latin_1_Sup"),
    c(0x008E, None, "SINGLE SHIFT TWO", 0x00, "Latin_1_Sup"),
    c(0x008F, None, "SINGLE SHIFT THREE", 0x00, "Latin_1_Sup"),
    c(0x0090, None, "DEVICE CONTROL STRING", 0x00, "Latin_1_Sup"),
    c(0x0091, None, "PRIVATE USE ONE", 0x00, "Latin_1_Sup"),
    c(0x0092, None, "PRIVATE USE TWO", 0x00, "Latin_1_Sup"),
    c(0x0093, None, "SET TRANSMIT STATE", 0x00, "Latin_1_Sup"),
    c(0x0094, None, "CANCEL CHARACTER", 0x00, "Latin_1_Sup"),
    c(0x0095, None, "MESSAGE WAITING", 0x00, "Latin_1_Sup"),
    c(0x0096, None, "START OF GUARDED AREA", 0x00, "Latin_1_Sup"),
    c(0x0097, None, "END OF GUARDED AREA", 0x00, "Latin_1_Sup"),
    c(0x0098, None, "START OF STRING", 0x00, "Latin_1_Sup"),
    c(0x0099, None, "SINGLE GRAPHIC CHARACTER INTRODUCER", 0x00, "Latin_1_Sup"),
    c(0x009A, None, "SINGLE CHARACTER INTRODUCER", 0x00, "Latin_1_Sup"),
    c(0x009B, None, "CONTROL SEQUENCE INTRODUCER", 0x00, "Latin_1_Sup"),
    c(0x009C, None, "STRING TERMINATOR", 0x00, "Latin_1_Sup"),
    c(0x009D, None, "OPERATING SYSTEM COMMAND", 0x00, "Latin_1_Sup"),
    c(0x009E, None, "PRIVACY MESSAGE", 0x00, "Latin_1_Sup"),
    c(0x009F, None, "APPLICATION PROGRAM COMMAND", 0x00, "Latin_1_Sup"),
    c(0x00A0, None, "NO-BREAK SPACE", 0x00, "Latin_1_Sup"),
    c(0x00A1, None, "INVERTED EXCLAMATION MARK", 0x00, "Latin_1_Sup"),
    c(0x00A2, None, "CENT SIGN", 0x00, "Latin_1_Sup"),
    c(0x00A3, None, "POUND SIGN", 0x00, "Latin_1_Sup"),
    c(0x00A4, None, "CURRENCY SIGN", 0x00, "Latin_1_Sup"),
    c(0x00A5, None, "YEN SIGN", 0x00, "Latin_1_Sup"),
    c(0x00A6, None, "BROKEN BAR", 0x00, "Latin_1_Sup"),
    c(0x00A7, None, "SECTION SIGN", 0x00, "Latin_1_Sup"),
    c(0x00A8, None, "DIAERESIS", 0x00, "Latin_1_Sup"),
    c(0x00A9, None, "COPYRIGHT SIGN", 0x00, "Latin_1_Sup"),
    c(0x00AA, None, "FEMININE ORDINAL INDICATOR", 0x31, "Latin_1_Sup"),
    c(0x00AB, None, "LEFT-POINTING DOUBLE ANGLE QUOTATION MARK", 0x00, "Latin_1_Sup"),
    c(0x00AC, None, "NOT SIGN", 0x02, "Latin_1_Sup"),
    c(0x00AD, None, "SOFT HYPHEN", 0x00, "Latin_1_Sup"),
    c(0x00AE, None, "REGISTERED SIGN", 0x00, "Latin_1_Sup"),
    c(0x00AF, None, "MACRON", 0x00, "Latin_1_Sup"),
    c(0x00B0, None, "DEGREE SIGN", 0x00, "Latin_1_Sup"),
    c(0x00B1, None, "PLUS-MINUS SIGN", 0x02, "Latin_1_Sup"),
    c(0x00B2, None, "SUPERSCRIPT TWO", 0x00, "Latin_1_Sup"),
    c(0x00B3, None, "SUPERSCRIPT THREE", 0x00, "Latin_1_Sup"),
    c(0x00B4, None, "ACUTE ACCENT", 0x00, "Latin_1_Sup"),
    c(0x00B5, None, "MICRO SIGN", 0x31, "Latin_1_Sup"),
    c(0x00B6, None, "PILCROW SIGN", 0x00, "Latin_1_Sup"),
    c(0x00B7, None, "MIDDLE DOT", 0x20, "Latin_1_Sup"),
    c(0x00B8, None, "CEDILLA", 0x00, "Latin_1_Sup"),
    c(0x00B9, None, "SUPERSCRIPT ONE", 0x00, "Latin_1_Sup"),
    c(0x00BA, None, "MASCULINE ORDINAL INDICATOR", 0x31, "Latin_1_Sup"),
    c(0x00BB, None, "RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK", 0x00, "Latin_1_Sup"),
    c(0x00BC, None, "VULGAR FRACTION ONE QUARTER", 0x00, "Latin_1_Sup"),
    c(0x00BD, None, "VULGAR FRACTION ONE HALF", 0x00, "Latin_1_Sup"),
    c(0x00BE, None, "VULGAR FRACTION THREE QUARTERS", 0x00, "Latin_1_Sup"),
    c(0x00BF, None, "INVERTED QUESTION MARK", 0x00, "Latin_1_Sup"),
    c(0x00C0, None, "LATIN CAPITAL LETTER A WITH GRAVE", 0x31, "Latin_1_Sup"),
    c(0x00C1, None, "LATIN CAPITAL LETTER A WITH ACUTE", 0x31, "Latin_1_Sup"),
    c(0x00C2, None, "LATIN CAPITAL LETTER A WITH CIRCUMFLEX", 0x31, "Latin_1_Sup"),
    c(0x00C3, None, "LATIN CAPITAL LETTER A WITH TILDE", 0x31, "Latin_1_Sup"),
    c(0x00C4, None, "LATIN CAPITAL LETTER A WITH DIAERESIS", 0x31, "Latin_1_Sup"),
    c(0x00C5, None, "LATIN CAPITAL LETTER A WITH RING ABOVE", 0x31, "Latin_1_Sup"),
    c(0x00C6, None, "LATIN CAPITAL LETTER AE", 0x31, "Latin_1_Sup"),
    c(0x00C7, None, "LATIN CAPITAL LETTER C WITH CEDILLA", 0x31, "Latin_1_Sup"),
    c(0x00C8, None, "LATIN CAPITAL LETTER E WITH GRAVE", 0x31, "Latin_1_Sup"),
    c(0x00C9, None, "LATIN CAPITAL LETTER E WITH ACUTE", 0x31, "Latin_1_Sup"),
    c(0x00CA, None, "LATIN CAPITAL LETTER E WITH CIRCUMFLEX", 0x31, "Latin_1_Sup"),
    c(0x00CB, None, "LATIN CAPITAL LETTER E WITH DIAERESIS", 0x31, "Latin_1_Sup"),
    c(0x00CC, None, "LATIN CAPITAL LETTER I WITH GRAVE", 0x31, "Latin_1_Sup"),
    c(0x00CD, None, "LATIN CAPITAL LETTER I WITH ACUTE", 0x31, "Latin_1_Sup"),
    c(0x00CE, None, "LATIN CAPITAL LETTER I WITH CIRCUMFLEX", 0x31, "Latin_1_Sup"),
    c(0x00CF, None, "LATIN CAPITAL LETTER I WITH DIAERESIS", 0x31, "Latin_1_Sup"),
    c(0x00D0, None, "LATIN CAPITAL LETTER ETH", 0x31, "Latin_1_Sup"),
    c(0x00D1, None, "LATIN CAPITAL LETTER N WITH TILDE", 0x31, "Latin_1_Sup"),
    c(0x00D2, None, "LATIN CAPITAL LETTER O WITH GRAVE", 0x31, "Latin_1_Sup"),
    c(0x00D3, None, "LATIN CAPITAL LETTER O WITH ACUTE", 0x31, "Latin_1_Sup"),
    c(0x00D4, None, "LATIN CAPITAL LETTER O WITH CIRCUMFLEX", 0x31, "Latin_1_Sup"),
    c(0x00D5, None, "LATIN CAPITAL LETTER O WITH TILDE", 0x31, "Latin_1_Sup"),
    c(0x00D6, None, "LATIN CAPITAL LETTER O WITH DIAERESIS", 0x31, "Latin_1_Sup"),
    c(0x00D7, None, "MULTIPLICATION SIGN", 0x02, "Latin_1_Sup"),
    c(0x00D8, None, "LATIN CAPITAL LETTER O WITH STROKE", 0x31, "Latin_1_Sup"),
    c(0x00D9, None, "LATIN CAPITAL LETTER U WITH GRAVE", 0x31, "Latin_1_Sup"),
    c(0x00DA, None, "LATIN CAPITAL LETTER U WITH ACUTE", 0x31, "Latin_1_Sup"),
    c(0x00DB, None, "LATIN CAPITAL LETTER U WITH CIRCUMFLEX", 0x31, "Latin_1_Sup"),
    c(0x00DC, None, "LATIN CAPITAL LETTER U WITH DIAERESIS", 0x31, "Latin_1_Sup"),
    c(0x00DD, None, "LATIN CAPITAL LETTER Y WITH ACUTE", 0x31, "Latin_1_Sup"),
    c(0x00DE, None, "LATIN CAPITAL LETTER THORN", 0x31, "Latin_1_Sup"),
    c(0x00DF, None, "LATIN SMALL LETTER SHARP S", 0x31, "Latin_1_Sup"),
    c(0x00E0, None, "LATIN SMALL LETTER A WITH GRAVE", 0x31, "Latin_1_Sup"),
    c(0x00E1, None, "LATIN SMALL LETTER A WITH ACUTE", 0x31, "Latin_1_Sup"),
    c(0x00E2, None, "LATIN SMALL LETTER A WITH CIRCUMFLEX", 0x31, "Latin_1_Sup"),
    c(0x00E3, None, "LATIN SMALL LETTER A WITH TILDE", 0x31, "Latin_1_Sup"),
    c(0x00E4, None, "LATIN SMALL LETTER A WITH DIAERESIS", 0x31, "Latin_1_Sup"),
    c(0x00E5, None, "LATIN SMALL LETTER A WITH RING ABOVE", 0x31, "Latin_1_Sup"),
    c(0x00E6, None, "LATIN SMALL LETTER AE", 0x31, "Latin_1_Sup"),
    c(0x00E7, None, "LATIN SMALL LETTER C WITH CEDILLA", 0x31, "Latin_1_Sup"),
    c(0x00E8, None, "LATIN SMALL LETTER E WITH GRAVE", 0x31, "Latin_1_Sup"),
    c(0x00E9, None, "LATIN SMALL LETTER E WITH ACUTE", 0x31, "Latin_1_Sup"),
    c(0x00EA, None, "LATIN SMALL LETTER E WITH CIRCUMFLEX", 0x31, "Latin_1_Sup"),
    c(0x00EB, None, "LATIN SMALL LETTER E WITH DIAERESIS", 0x31, "Latin_1_Sup"),
    c(0x00EC, None, "LATIN SMALL LETTER I WITH GRAVE", 0x31, "Latin_1_Sup"),
    c(0x00ED, None, "LATIN SMALL LETTER I WITH ACUTE", 0x31, "Latin_1_Sup"),
    c(0x00EE, None, "LATIN SMALL LETTER I WITH CIRCUMFLEX", 0x31, "Latin_1_Sup"),
    c(0x00EF, None, "LATIN SMALL LETTER I WITH DIAERESIS", 0x31, "Latin_1_Sup"),
    c(0x00F0, None, "LATIN SMALL LETTER ETH", 0x31, "Latin_1_Sup"),
    c(0x00F1, None, "LATIN SMALL LETTER N WITH TILDE", 0x31, "Latin_1_Sup"),
    c(0x00F2, None, "LATIN SMALL LETTER O WITH GRAVE", 0x31, "Latin_1_Sup"),
    c(0x00F3, None, "LATIN SMALL LETTER O WITH ACUTE", 0x31, "Latin_1_Sup"),
    c(0x00F4, None, "LATIN SMALL LETTER O WITH CIRCUMFLEX", 0x31, "Latin_1_Sup"),
    c(0x00F5, None, "LATIN SMALL LETTER O WITH TILDE", 0x31, "Latin_1_Sup"),
    c(0x00F6, None, "LATIN SMALL LETTER O WITH DIAERESIS", 0x31, "Latin_1_Sup"),
    c(0x00F7, None, "DIVISION SIGN", 0x02, "Latin_1_Sup"),
    c(0x00F8, None, "LATIN SMALL LETTER O WITH STROKE", 0x31, "Latin_1_Sup"),
    c(0x00F9, None, "LATIN SMALL LETTER U WITH GRAVE", 0x31, "Latin_1_Sup"),
    c(0x00FA, None, "LATIN SMALL LETTER U WITH ACUTE", 0x31, "Latin_1_Sup"),
    c(0x00FB, None, "LATIN SMALL LETTER U WITH CIRCUMFLEX", 0x31, "Latin_1_Sup"),
    c(0x00FC, None, "LATIN SMALL LETTER U WITH DIAERESIS", 0x31, "Latin_1_Sup"),
    c(0x00FD, None, "LATIN SMALL LETTER Y WITH ACUTE", 0x31, "Latin_1_Sup"),
    c(0x00FE, None, "LATIN SMALL LETTER THORN", 0x31, "Latin_1_Sup"),
    c(0x00FF, None, "LATIN SMALL LETTER Y WITH DIAERESIS", 0x31, "Latin_1_Sup"),
    c(0x0100, None, "LATIN CAPITAL LETTER A WITH MACRON", 0x31, "Latin_Ext_A"),
    c(0x0101, None, "LATIN SMALL LETTER A WITH MACRON", 0x31, "Latin_Ext_A"),
    c(0x0102, None, "LATIN CAPITAL LETTER A WITH BREVE", 0x31, "Latin_Ext_A"),
    c(0x0103, None, "LATIN SMALL LETTER A WITH BREVE", 0x31, "Latin_Ext_A"),
    c(0x0104, None, "LATIN CAPITAL LETTER A WITH OGONEK", 0x31, "Latin_Ext_A"),
    c(0x0105, None, "LATIN SMALL LETTER A WITH OGONEK", 0x31, "Latin_Ext_A"),
    c(0x0106, None, "LATIN CAPITAL LETTER C WITH ACUTE", 0x31, "Latin_Ext_A"),
    c(0x0107, None, "LATIN SMALL LETTER C WITH ACUTE", 0x31, "Latin_Ext_A"),
    c(0x0108, None, "LATIN CAPITAL LETTER C WITH CIRCUMFLEX", 0x31, "Latin_Ext_A"),
    c(0x0109, None, "LATIN SMALL LETTER C WITH CIRCUMFLEX", 0x31, "Latin_Ext_A"),
    c(0x010A, None, "LATIN CAPITAL LETTER C WITH DOT ABOVE", 0x31, "Latin_Ext_A"),
    c(0x010B, None, "LATIN SMALL LETTER C WITH DOT ABOVE", 0x31, "Latin_Ext_A"),
    c(0x010C, None, "LATIN CAPITAL LETTER C WITH CARON", 0x31, "Latin_Ext_A"),
    c(0x010D, None, "LATIN SMALL LETTER C WITH CARON", 0x31, "Latin_Ext_A"),
    c(0x010E, None, "LATIN CAPITAL LETTER D WITH CARON", 0x31, "Latin_Ext_A"),
    c(0x010F, None, "LATIN SMALL LETTER D WITH CARON", 0x31, "Latin_Ext_A"),
    c(0x0110, None, "LATIN CAPITAL LETTER D WITH STROKE", 0x31, "Latin_Ext_A"),
    c(0x0111, None, "LATIN SMALL LETTER D WITH STROKE", 0x31, "Latin_Ext_A"),
    c(0x0112, None, "LATIN CAPITAL LETTER E WITH MACRON", 0x31, "Latin_Ext_A"),
    c(0x0113, None, "LATIN SMALL LETTER E WITH MACRON", 0x31, "Latin_Ext_A"),
    c(0x0114, None, "LATIN CAPITAL LETTER E WITH BREVE", 0x31, "Latin_Ext_A"),
    c(0x0115, None, "LATIN SMALL LETTER E WITH BREVE", 0x31, "Latin_Ext_A"),
    c(0x0116, None, "LATIN CAPITAL LETTER E WITH DOT ABOVE", 0x31, "Latin_Ext_A"),
    c(0x0117, None, "LATIN SMALL LETTER E WITH DOT ABOVE", 0x31, "Latin_Ext_A"),
    c(0x0118, None, "LATIN CAPITAL LETTER E WITH OGONEK", 0x31, "Latin_Ext_A"),
    c(0x0119, None, "LATIN SMALL LETTER E WITH OGONEK", 0x31, "Latin_Ext_A"),
    c(0x011A, None, "LATIN CAPITAL LETTER E WITH CARON", 0x31, "Latin_Ext_A"),
    c(0x011B, None, "LATIN SMALL LETTER E WITH CARON", 0x31, "Latin_Ext_A"),
    c(0x011C, None, "LATIN CAPITAL LETTER G WITH CIRCUMFLEX", 0x31, "Latin_Ext_A"),
    c(0x011D, None, "LATIN SMALL LETTER G WITH CIRCUMFLEX", 0x31, "Latin_Ext_A"),
    c(0x011E, None, "LATIN CAPITAL LETTER G WITH BREVE", 0x31, "Latin_Ext_A"),
    c(0x011F, None, "LATIN SMALL LETTER G WITH BREVE", 0x31, "Latin_Ext_A"),
    c(0x0120, None, "LATIN CAPITAL LETTER G WITH DOT ABOVE", 0x31, "Latin_Ext_A"),
    c(0x0121, None, "LATIN SMALL LETTER G WITH DOT ABOVE", 0x31, "Latin_Ext_A"),
    c(0x0122, None, "LATIN CAPITAL LETTER G WITH CEDILLA", 0x31, "Latin_Ext_A"),
    c(0x0123, None, "LATIN SMALL LETTER G WITH CEDILLA", 0x31, "Latin_Ext_A"),
    c(0x0124, None, "LATIN CAPITAL LETTER H WITH CIRCUMFLEX", 0x31, "Latin_Ext_A"),
    c(0x0125, None, "LATIN SMALL LETTER H WITH CIRCUMFLEX", 0x31, "Latin_Ext_A"),
    c(0x0126, None, "LATIN CAPITAL LETTER H WITH STROKE", 0x31, "Latin_Ext_A"),
    c(0x0127, None, "LATIN SMALL LETTER H WITH STROKE", 0x31, "Latin_Ext_A"),
    c(0x0128, None, "LATIN CAPITAL LETTER I WITH TILDE", 0x31, "Latin_Ext_A"),
    c(0x0129, None, "LATIN SMALL LETTER I WITH TILDE", 0x31, "Latin_Ext_A"),
    c(0x012A, None, "LATIN CAPITAL LETTER I WITH MACRON", 0x31, "Latin_Ext_A"),
    c(0x012B, None, "LATIN SMALL LETTER I WITH MACRON", 0x31, "Latin_Ext_A"),
    c(0x012C, None, "LATIN CAPITAL LETTER I WITH BREVE", 0x31, "Latin_Ext_A"),
    c(0x012D, None, "LATIN SMALL LETTER I WITH BREVE", 0x31, "Latin_Ext_A"),
    c(0x012E, None, "LATIN CAPITAL LETTER I WITH OGONEK", 0x31, "Latin_Ext_A"),
    c(0x012F, None, "LATIN SMALL LETTER I WITH OGONEK", 0x31, "Latin_Ext_A"),
    c(0x0130, None, "LATIN CAPITAL LETTER I WITH DOT ABOVE", 0x31, "Latin_Ext_A"),
    c(0x0131, None, "LATIN SMALL LETTER DOTLESS I", 0x31, "Latin_Ext_A"),
    c(0x0132, None, "LATIN CAPITAL LIGATURE IJ", 0x31, "Latin_Ext_A"),
    c(0x0133, None, "LATIN SMALL LIGATURE IJ", 0x31, "Latin_Ext_A"),
    c(0x0134, None, "LATIN CAPITAL LETTER J WITH CIRCUMFLEX", 0x31, "Latin_Ext_A"),
    c(0x0135, None, "LATIN SMALL LETTER J WITH CIRCUMFLEX", 0x31, "Latin_Ext_A"),
    c(0x0136, None, "LATIN CAPITAL LETTER K WITH CEDILLA", 0x31, "Latin_Ext_A"),
    c(0x0137, None, "LATIN SMALL LETTER K WITH CEDILLA", 0x31, "Latin_Ext_A"),
    c(0x0138, None, "LATIN SMALL LETTER KRA", 0x31, "Latin_Ext_A"),
    c(0x0139, None, "LATIN CAPITAL LETTER L WITH ACUTE", 0x31, "Latin_Ext_A"),
    c(0x013A, None, "LATIN SMALL LETTER L WITH ACUTE", 0x31, "Latin_Ext_A"),
    c(0x013B, None, "LATIN CAPITAL LETTER L WITH CEDILLA", 0x31, "Latin_Ext_A"),
    c(0x013C, None, "LATIN SMALL LETTER L WITH CEDILLA", 0x31, "Latin_Ext_A"),
    c(0x013D, None, "LATIN CAPITAL LETTER L WITH CARON", 0x31, "Latin_Ext_A"),
    c(0x013E, None, "LATIN SMALL LETTER L WITH CARON", 0x31, "Latin_Ext_A"),
    c(0x013F, None, "LATIN CAPITAL LETTER L WITH MIDDLE DOT", 0x31, "Latin_Ext_A"),
    c(0x0140, None, "LATIN SMALL LETTER L WITH MIDDLE DOT", 0x31, "Latin_Ext_A"),
    c(0x0141, None, "LATIN CAPITAL LETTER L WITH STROKE", 0x31, "Latin_Ext_A"),
    c(0x0142, None, "LATIN SMALL LETTER L WITH STROKE", 0x31, "Latin_Ext_A"),
    c(0x0143, None, "LATIN CAPITAL LETTER N WITH ACUTE", 0x31, "Latin_Ext_A"),
    c(0x0144, None, "LATIN SMALL LETTER N WITH ACUTE", 0x31, "Latin_Ext_A"),
    c(0x0145, None, "LATIN CAPITAL LETTER N WITH CEDILLA", 0x31, "Latin_Ext_A"),
    c(0x0146, None, "LATIN SMALL LETTER N WITH CEDILLA", 0x31, "Latin_Ext_A"),
    c(0x0147, None, "LATIN CAPITAL LETTER N WITH CARON", 0x31, "Latin_Ext_A"),
    c(0x0148, None, "LATIN SMALL LETTER N WITH CARON", 0x31, "Latin_Ext_A"),
    c(0x0149, None, "LATIN SMALL LETTER N PRECEDED BY APOSTROPHE", 0x39, "Latin_Ext_A"),
    c(0x014A, None, "LATIN CAPITAL LETTER ENG", 0x31, "Latin_Ext_A"),
    c(0x014B, None, "LATIN SMALL LETTER ENG", 0x31, "Latin_Ext_A"),
    c(0x014C, None, "LATIN CAPITAL LETTER O WITH MACRON", 0x31, "Latin_Ext_A"),
    c(0x014D, None, "LATIN SMALL LETTER O WITH MACRON", 0x31, "Latin_Ext_A"),
    c(0x014E, None, "LATIN CAPITAL LETTER O WITH BREVE", 0x31, "Latin_Ext_A"),
    c(0x014F, None, "LATIN SMALL LETTER O WITH BREVE", 0x31, "Latin_Ext_A"),
    c(0x0150, None, "LATIN CAPITAL LETTER O WITH DOUBLE ACUTE", 0x31, "Latin_Ext_A"),
    c(0x0151, None, "LATIN SMALL LETTER O WITH DOUBLE ACUTE", 0x31, "Latin_Ext_A"),
    c(0x0152, None, "LATIN CAPITAL LIGATURE OE", 0x31, "Latin_Ext_A"),
    c(0x0153, None, "LATIN SMALL LIGATURE OE", 0x31, "Latin_Ext_A"),
    c(0x0154, None, "LATIN CAPITAL LETTER R WITH ACUTE", 0x31, "Latin_Ext_A"),
    c(0x0155, None, "LATIN SMALL LETTER R WITH ACUTE", 0x31, "Latin_Ext_A"),
    c(0x0156, None, "LATIN CAPITAL LETTER R WITH CEDILLA", 0x31, "Latin_Ext_A"),
    c(0x0157, None, "LATIN SMALL LETTER R WITH CEDILLA", 0x31, "Latin_Ext_A"),
    c(0x0158, None, "LATIN CAPITAL LETTER R WITH CARON", 0x31, "Latin_Ext_A"),
    c(0x0159, None, "LATIN SMALL LETTER R WITH CARON", 0x31, "Latin_Ext_A"),
    c(0x015A, None, "LATIN CAPITAL LETTER S WITH ACUTE", 0x31, "Latin_Ext_A"),
    c(0x015B, None, "LATIN SMALL LETTER S WITH ACUTE", 0x31, "Latin_Ext_A"),
    c(0x015C, None, "LATIN CAPITAL LETTER S WITH CIRCUMFLEX", 0x31, "Latin_Ext_A"),
    c(0x015D, None, "LATIN SMALL LETTER S WITH CIRCUMFLEX", 0x31, "Latin_Ext_A"),
    c(0x015E, None, "LATIN CAPITAL LETTER S WITH CEDILLA", 0x31, "Latin_Ext_A"),
    c(0x015F, None, "LATIN SMALL LETTER S WITH CEDILLA", 0x31, "Latin_Ext_A"),
    c(0x0160, None, "LATIN CAPITAL LETTER S WITH CARON", 0x31, "Latin_Ext_A"),
    c(0x0161, None, "LATIN SMALL LETTER S WITH CARON", 0x31, "Latin_Ext_A"),
    c(0x0162, None, "LATIN CAPITAL LETTER T WITH CEDILLA", 0x31, "Latin_Ext_A"),
    c(0x0163, None, "LATIN SMALL LETTER T WITH CEDILLA", 0x31, "Latin_Ext_A"),
    c(0x0164, None, "LATIN CAPITAL LETTER T WITH CARON", 0x31, "Latin_Ext_A"),
    c(0x0165, None, "LATIN SMALL LETTER T WITH CARON", 0x31, "Latin_Ext_A"),
    c(0x0166, None, "LATIN CAPITAL LETTER T WITH STROKE", 0x31, "Latin_Ext_A"),
    c(0x0167, None, "LATIN SMALL LETTER T WITH STROKE", 0x31, "Latin_Ext_A"),
    c(0x0168, None, "LATIN CAPITAL LETTER U WITH TILDE", 0x31, "Latin_Ext_A"),
    c(0x0169, None, "LATIN SMALL LETTER U WITH TILDE", 0x31, "Latin_Ext_A"),
    c(0x016A, None, "LATIN CAPITAL LETTER U WITH MACRON", 0x31, "Latin_Ext_A"),
    c(0x016B, None, "LATIN SMALL LETTER U WITH MACRON", 0x31, "Latin_Ext_A"),
    c(0x016C, None, "LATIN CAPITAL LETTER U WITH BREVE", 0x31, "Latin_Ext_A"),
    c(0x016D, None, "LATIN SMALL LETTER U WITH BREVE", 0x31, "Latin_Ext_A"),
    c(0x016E, None, "LATIN CAPITAL LETTER U WITH RING ABOVE", 0x31, "Latin_Ext_A"),
    c(0x016F, None, "LATIN SMALL LETTER U WITH RING ABOVE", 0x31, "Latin_Ext_A"),
    c(0x0170, None, "LATIN CAPITAL LETTER U WITH DOUBLE ACUTE", 0x31, "Latin_Ext_A"),
    c(0x0171, None, "LATIN SMALL LETTER U WITH DOUBLE ACUTE", 0x31, "Latin_Ext_A"),
    c(0x0172, None, "LATIN CAPITAL LETTER U WITH OGONEK", 0x31, "Latin_Ext_A"),
    c(0x0173, None, "LATIN SMALL LETTER U WITH OGONEK", 0x31, "Latin_Ext_A"),
    c(0x0174, None, "LATIN CAPITAL LETTER W WITH CIRCUMFLEX", 0x31, "Latin_Ext_A"),
    c(0x0175, None, "LATIN SMALL LETTER W WITH CIRCUMFLEX", 0x31, "Latin_Ext_A"),
    c(0x0176, None, "LATIN CAPITAL LETTER Y WITH CIRCUMFLEX", 0x31, "Latin_Ext_A"),
    c(0x0177, None, "LATIN SMALL LETTER Y WITH CIRCUMFLEX", 0x31, "Latin_Ext_A"),
    c(0x0178, None, "LATIN CAPITAL LETTER Y WITH DIAERESIS", 0x31, "Latin_Ext_A"),
    c(0x0179, None, "LATIN CAPITAL LETTER Z WITH ACUTE", 0x31, "Latin_Ext_A"),
    c(0x017A, None, "LATIN SMALL LETTER Z WITH ACUTE", 0x31, "Latin_Ext_A"),
    c(0x017B, None, "LATIN CAPITAL LETTER Z WITH DOT ABOVE", 0x31, "Latin_Ext_A"),
    c(0x017C, None, "LATIN SMALL LETTER Z WITH DOT ABOVE", 0x31, "Latin_Ext_A"),
    c(0x017D, None, "LATIN CAPITAL LETTER Z WITH CARON", 0x31, "Latin_Ext_A"),
    c(0x017E, None, "LATIN SMALL LETTER Z WITH CARON", 0x31, "Latin_Ext_A"),
    c(0x017F, None, "LATIN SMALL LETTER LONG S", 0x31, "Latin_Ext_A"),
    c(0x0180, None, "LATIN SMALL LETTER B WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x0181, None, "LATIN CAPITAL LETTER B WITH HOOK", 0x31, "Latin_Ext_B"),
    c(0x0182, None, "LATIN CAPITAL LETTER B WITH TOPBAR", 0x31, "Latin_Ext_B"),
    c(0x0183, None, "LATIN SMALL LETTER B WITH TOPBAR", 0x31, "Latin_Ext_B"),
    c(0x0184, None, "LATIN CAPITAL LETTER TONE SIX", 0x31, "Latin_Ext_B"),
    c(0x0185, None, "LATIN SMALL LETTER TONE SIX", 0x31, "Latin_Ext_B"),
    c(0x0186, None, "LATIN CAPITAL LETTER OPEN O", 0x31, "Latin_Ext_B"),
    c(0x0187, None, "LATIN CAPITAL LETTER C WITH HOOK", 0x31, "Latin_Ext_B"),
    c(0x0188, None, "LATIN SMALL LETTER C WITH HOOK", 0x31, "Latin_Ext_B"),
    c(0x0189, None, "LATIN CAPITAL LETTER AFRICAN D", 0x31, "Latin_Ext_B"),
    c(0x018A, None, "LATIN CAPITAL LETTER D WITH HOOK", 0x31, "Latin_Ext_B"),
    c(0x018B, None, "LATIN CAPITAL LETTER D WITH TOPBAR", 0x31, "Latin_Ext_B"),
    c(0x018C, None, "LATIN SMALL LETTER D WITH TOPBAR", 0x31, "Latin_Ext_B"),
    c(0x018D, None, "LATIN SMALL LETTER TURNED DELTA", 0x31, "Latin_Ext_B"),
    c(0x018E, None, "LATIN CAPITAL LETTER REVERSED E", 0x31, "Latin_Ext_B"),
    c(0x018F, None, "LATIN CAPITAL LETTER SCHWA", 0x31, "Latin_Ext_B"),
    c(0x0190, None, "LATIN CAPITAL LETTER OPEN E", 0x31, "Latin_Ext_B"),
    c(0x0191, None, "LATIN CAPITAL LETTER F WITH HOOK", 0x31, "Latin_Ext_B"),
    c(0x0192, None, "LATIN SMALL LETTER F WITH HOOK", 0x31, "Latin_Ext_B"),
    c(0x0193, None, "LATIN CAPITAL LETTER G WITH HOOK", 0x31, "Latin_Ext_B"),
    c(0x0194, None, "LATIN CAPITAL LETTER GAMMA", 0x31, "Latin_Ext_B"),
    c(0x0195, None, "LATIN SMALL LETTER HV", 0x31, "Latin_Ext_B"),
    c(0x0196, None, "LATIN CAPITAL LETTER IOTA", 0x31, "Latin_Ext_B"),
    c(0x0197, None, "LATIN CAPITAL LETTER I WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x0198, None, "LATIN CAPITAL LETTER K WITH HOOK", 0x31, "Latin_Ext_B"),
    c(0x0199, None, "LATIN SMALL LETTER K WITH HOOK", 0x31, "Latin_Ext_B"),
    c(0x019A, None, "LATIN SMALL LETTER L WITH BAR", 0x31, "Latin_Ext_B"),
    c(0x019B, None, "LATIN SMALL LETTER LAMBDA WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x019C, None, "LATIN CAPITAL LETTER TURNED M", 0x31, "Latin_Ext_B"),
    c(0x019D, None, "LATIN CAPITAL LETTER N WITH LEFT HOOK", 0x31, "Latin_Ext_B"),
    c(0x019E, None, "LATIN SMALL LETTER N WITH LONG RIGHT LEG", 0x31, "Latin_Ext_B"),
    c(0x019F, None, "LATIN CAPITAL LETTER O WITH MIDDLE TILDE", 0x31, "Latin_Ext_B"),
    c(0x01A0, None, "LATIN CAPITAL LETTER O WITH HORN", 0x31, "Latin_Ext_B"),
    c(0x01A1, None, "LATIN SMALL LETTER O WITH HORN", 0x31, "Latin_Ext_B"),
    c(0x01A2, None, "LATIN CAPITAL LETTER GHA", 0x31, "Latin_Ext_B"),
    c(0x01A3, None, "LATIN SMALL LETTER GHA", 0x31, "Latin_Ext_B"),
    c(0x01A4, None, "LATIN CAPITAL LETTER P WITH HOOK", 0x31, "Latin_Ext_B"),
    c(0x01A5, None, "LATIN SMALL LETTER P WITH HOOK", 0x31, "Latin_Ext_B"),
    c(0x01A6, None, "LATIN LETTER YR", 0x31, "Latin_Ext_B"),
    c(0x01A7, None, "LATIN CAPITAL LETTER TONE TWO", 0x31, "Latin_Ext_B"),
    c(0x01A8, None, "LATIN SMALL LETTER TONE TWO", 0x31, "Latin_Ext_B"),
    c(0x01A9, None, "LATIN CAPITAL LETTER ESH", 0x31, "Latin_Ext_B"),
    c(0x01AA, None, "LATIN LETTER REVERSED ESH LOOP", 0x31, "Latin_Ext_B"),
    c(0x01AB, None, "LATIN SMALL LETTER T WITH PALATAL HOOK", 0x31, "Latin_Ext_B"),
    c(0x01AC, None, "LATIN CAPITAL LETTER T WITH HOOK", 0x31, "Latin_Ext_B"),
    c(0x01AD, None, "LATIN SMALL LETTER T WITH HOOK", 0x31, "Latin_Ext_B"),
    c(0x01AE, None, "LATIN CAPITAL LETTER T WITH RETROFLEX HOOK", 0x31, "Latin_Ext_B"),
    c(0x01AF, None, "LATIN CAPITAL LETTER U WITH HORN", 0x31, "Latin_Ext_B"),
    c(0x01B0, None, "LATIN SMALL LETTER U WITH HORN", 0x31, "Latin_Ext_B"),
    c(0x01B1, None, "LATIN CAPITAL LETTER UPSILON", 0x31, "Latin_Ext_B"),
    c(0x01B2, None, "LATIN CAPITAL LETTER V WITH HOOK", 0x31, "Latin_Ext_B"),
    c(0x01B3, None, "LATIN CAPITAL LETTER Y WITH HOOK", 0x31, "Latin_Ext_B"),
    c(0x01B4, None, "LATIN SMALL LETTER Y WITH HOOK", 0x31, "Latin_Ext_B"),
    c(0x01B5, None, "LATIN CAPITAL LETTER Z WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x01B6, None, "LATIN SMALL LETTER Z WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x01B7, None, "LATIN CAPITAL LETTER EZH", 0x31, "Latin_Ext_B"),
    c(0x01B8, None, "LATIN CAPITAL LETTER EZH REVERSED", 0x31, "Latin_Ext_B"),
    c(0x01B9, None, "LATIN SMALL LETTER EZH REVERSED", 0x31, "Latin_Ext_B"),
    c(0x01BA, None, "LATIN SMALL LETTER EZH WITH TAIL", 0x31, "Latin_Ext_B"),
    c(0x01BB, None, "LATIN LETTER TWO WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x01BC, None, "LATIN CAPITAL LETTER TONE FIVE", 0x31, "Latin_Ext_B"),
    c(0x01BD, None, "LATIN SMALL LETTER TONE FIVE", 0x31, "Latin_Ext_B"),
    c(0x01BE, None, "LATIN LETTER INVERTED GLOTTAL STOP WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x01BF, None, "LATIN LETTER WYNN", 0x31, "Latin_Ext_B"),
    c(0x01C0, None, "LATIN LETTER DENTAL CLICK", 0x31, "Latin_Ext_B"),
    c(0x01C1, None, "LATIN LETTER LATERAL CLICK", 0x31, "Latin_Ext_B"),
    c(0x01C2, None, "LATIN LETTER ALVEOLAR CLICK", 0x31, "Latin_Ext_B"),
    c(0x01C3, None, "LATIN LETTER RETROFLEX CLICK", 0x31, "Latin_Ext_B"),
    c(0x01C4, None, "LATIN CAPITAL LETTER DZ WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x01C5, None, "LATIN CAPITAL LETTER D WITH SMALL LETTER Z WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x01C6, None, "LATIN SMALL LETTER DZ WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x01C7, None, "LATIN CAPITAL LETTER LJ", 0x31, "Latin_Ext_B"),
    c(0x01C8, None, "LATIN CAPITAL LETTER L WITH SMALL LETTER J", 0x31, "Latin_Ext_B"),
    c(0x01C9, None, "LATIN SMALL LETTER LJ", 0x31, "Latin_Ext_B"),
    c(0x01CA, None, "LATIN CAPITAL LETTER NJ", 0x31, "Latin_Ext_B"),
    c(0x01CB, None, "LATIN CAPITAL LETTER N WITH SMALL LETTER J", 0x31, "Latin_Ext_B"),
    c(0x01CC, None, "LATIN SMALL LETTER NJ", 0x31, "Latin_Ext_B"),
    c(0x01CD, None, "LATIN CAPITAL LETTER A WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x01CE, None, "LATIN SMALL LETTER A WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x01CF, None, "LATIN CAPITAL LETTER I WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x01D0, None, "LATIN SMALL LETTER I WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x01D1, None, "LATIN CAPITAL LETTER O WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x01D2, None, "LATIN SMALL LETTER O WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x01D3, None, "LATIN CAPITAL LETTER U WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x01D4, None, "LATIN SMALL LETTER U WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x01D5, None, "LATIN CAPITAL LETTER U WITH DIAERESIS AND MACRON", 0x31, "Latin_Ext_B"),
    c(0x01D6, None, "LATIN SMALL LETTER U WITH DIAERESIS AND MACRON", 0x31, "Latin_Ext_B"),
    c(0x01D7, None, "LATIN CAPITAL LETTER U WITH DIAERESIS AND ACUTE", 0x31, "Latin_Ext_B"),
    c(0x01D8, None, "LATIN SMALL LETTER U WITH DIAERESIS AND ACUTE", 0x31, "Latin_Ext_B"),
    c(0x01D9, None, "LATIN CAPITAL LETTER U WITH DIAERESIS AND CARON", 0x31, "Latin_Ext_B"),
    c(0x01DA, None, "LATIN SMALL LETTER U WITH DIAERESIS AND CARON", 0x31, "Latin_Ext_B"),
    c(0x01DB, None, "LATIN CAPITAL LETTER U WITH DIAERESIS AND GRAVE", 0x31, "Latin_Ext_B"),
    c(0x01DC, None, "LATIN SMALL LETTER U WITH DIAERESIS AND GRAVE", 0x31, "Latin_Ext_B"),
    c(0x01DD, None, "LATIN SMALL LETTER TURNED E", 0x31, "Latin_Ext_B"),
    c(0x01DE, None, "LATIN CAPITAL LETTER A WITH DIAERESIS AND MACRON", 0x31, "Latin_Ext_B"),
    c(0x01DF, None, "LATIN SMALL LETTER A WITH DIAERESIS AND MACRON", 0x31, "Latin_Ext_B"),
    c(0x01E0, None, "LATIN CAPITAL LETTER A WITH DOT ABOVE AND MACRON", 0x31, "Latin_Ext_B"),
    c(0x01E1, None, "LATIN SMALL LETTER A WITH DOT ABOVE AND MACRON", 0x31, "Latin_Ext_B"),
    c(0x01E2, None, "LATIN CAPITAL LETTER AE WITH MACRON", 0x31, "Latin_Ext_B"),
    c(0x01E3, None, "LATIN SMALL LETTER AE WITH MACRON", 0x31, "Latin_Ext_B"),
    c(0x01E4, None, "LATIN CAPITAL LETTER G WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x01E5, None, "LATIN SMALL LETTER G WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x01E6, None, "LATIN CAPITAL LETTER G WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x01E7, None, "LATIN SMALL LETTER G WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x01E8, None, "LATIN CAPITAL LETTER K WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x01E9, None, "LATIN SMALL LETTER K WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x01EA, None, "LATIN CAPITAL LETTER O WITH OGONEK", 0x31, "Latin_Ext_B"),
    c(0x01EB, None, "LATIN SMALL LETTER O WITH OGONEK", 0x31, "Latin_Ext_B"),
    c(0x01EC, None, "LATIN CAPITAL LETTER O WITH OGONEK AND MACRON", 0x31, "Latin_Ext_B"),
    c(0x01ED, None, "LATIN SMALL LETTER O WITH OGONEK AND MACRON", 0x31, "Latin_Ext_B"),
    c(0x01EE, None, "LATIN CAPITAL LETTER EZH WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x01EF, None, "LATIN SMALL LETTER EZH WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x01F0, None, "LATIN SMALL LETTER J WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x01F1, None, "LATIN CAPITAL LETTER DZ", 0x31, "Latin_Ext_B"),
    c(0x01F2, None, "LATIN CAPITAL LETTER D WITH SMALL LETTER Z", 0x31, "Latin_Ext_B"),
    c(0x01F3, None, "LATIN SMALL LETTER DZ", 0x31, "Latin_Ext_B"),
    c(0x01F4, None, "LATIN CAPITAL LETTER G WITH ACUTE", 0x31, "Latin_Ext_B"),
    c(0x01F5, None, "LATIN SMALL LETTER G WITH ACUTE", 0x31, "Latin_Ext_B"),
    c(0x01F6, None, "LATIN CAPITAL LETTER HWAIR", 0x31, "Latin_Ext_B"),
    c(0x01F7, None, "LATIN CAPITAL LETTER WYNN", 0x31, "Latin_Ext_B"),
    c(0x01F8, None, "LATIN CAPITAL LETTER N WITH GRAVE", 0x31, "Latin_Ext_B"),
    c(0x01F9, None, "LATIN SMALL LETTER N WITH GRAVE", 0x31, "Latin_Ext_B"),
    c(0x01FA, None, "LATIN CAPITAL LETTER A WITH RING ABOVE AND ACUTE", 0x31, "Latin_Ext_B"),
    c(0x01FB, None, "LATIN SMALL LETTER A WITH RING ABOVE AND ACUTE", 0x31, "Latin_Ext_B"),
    c(0x01FC, None, "LATIN CAPITAL LETTER AE WITH ACUTE", 0x31, "Latin_Ext_B"),
    c(0x01FD, None, "LATIN SMALL LETTER AE WITH ACUTE", 0x31, "Latin_Ext_B"),
    c(0x01FE, None, "LATIN CAPITAL LETTER O WITH STROKE AND ACUTE", 0x31, "Latin_Ext_B"),
    c(0x01FF, None, "LATIN SMALL LETTER O WITH STROKE AND ACUTE", 0x31, "Latin_Ext_B"),
    c(0x0200, None, "LATIN CAPITAL LETTER A WITH DOUBLE GRAVE", 0x31, "Latin_Ext_B"),
    c(0x0201, None, "LATIN SMALL LETTER A WITH DOUBLE GRAVE", 0x31, "Latin_Ext_B"),
    c(0x0202, None, "LATIN CAPITAL LETTER A WITH INVERTED BREVE", 0x31, "Latin_Ext_B"),
    c(0x0203, None, "LATIN SMALL LETTER A WITH INVERTED BREVE", 0x31, "Latin_Ext_B"),
    c(0x0204, None, "LATIN CAPITAL LETTER E WITH DOUBLE GRAVE", 0x31, "Latin_Ext_B"),
    c(0x0205, None, "LATIN SMALL LETTER E WITH DOUBLE GRAVE", 0x31, "Latin_Ext_B"),
    c(0x0206, None, "LATIN CAPITAL LETTER E WITH INVERTED BREVE", 0x31, "Latin_Ext_B"),
    c(0x0207, None, "LATIN SMALL LETTER E WITH INVERTED BREVE", 0x31, "Latin_Ext_B"),
    c(0x0208, None, "LATIN CAPITAL LETTER I WITH DOUBLE GRAVE", 0x31, "Latin_Ext_B"),
    c(0x0209, None, "LATIN SMALL LETTER I WITH DOUBLE GRAVE", 0x31, "Latin_Ext_B"),
    c(0x020A, None, "LATIN CAPITAL LETTER I WITH INVERTED BREVE", 0x31, "Latin_Ext_B"),
    c(0x020B, None, "LATIN SMALL LETTER I WITH INVERTED BREVE", 0x31, "Latin_Ext_B"),
    c(0x020C, None, "LATIN CAPITAL LETTER O WITH DOUBLE GRAVE", 0x31, "Latin_Ext_B"),
    c(0x020D, None, "LATIN SMALL LETTER O WITH DOUBLE GRAVE", 0x31, "Latin_Ext_B"),
    c(0x020E, None, "LATIN CAPITAL LETTER O WITH INVERTED BREVE", 0x31, "Latin_Ext_B"),
    c(0x020F, None, "LATIN SMALL LETTER O WITH INVERTED BREVE", 0x31, "Latin_Ext_B"),
    c(0x0210, None, "LATIN CAPITAL LETTER R WITH DOUBLE GRAVE", 0x31, "Latin_Ext_B"),
    c(0x0211, None, "LATIN SMALL LETTER R WITH DOUBLE GRAVE", 0x31, "Latin_Ext_B"),
    c(0x0212, None, "LATIN CAPITAL LETTER R WITH INVERTED BREVE", 0x31, "Latin_Ext_B"),
    c(0x0213, None, "LATIN SMALL LETTER R WITH INVERTED BREVE", 0x31, "Latin_Ext_B"),
    c(0x0214, None, "LATIN CAPITAL LETTER U WITH DOUBLE GRAVE", 0x31, "Latin_Ext_B"),
    c(0x0215, None, "LATIN SMALL LETTER U WITH DOUBLE GRAVE", 0x31, "Latin_Ext_B"),
    c(0x0216, None, "LATIN CAPITAL LETTER U WITH INVERTED BREVE", 0x31, "Latin_Ext_B"),
    c(0x0217, None, "LATIN SMALL LETTER U WITH INVERTED BREVE", 0x31, "Latin_Ext_B"),
    c(0x0218, None, "LATIN CAPITAL LETTER S WITH COMMA BELOW", 0x31, "Latin_Ext_B"),
    c(0x0219, None, "LATIN SMALL LETTER S WITH COMMA BELOW", 0x31, "Latin_Ext_B"),
    c(0x021A, None, "LATIN CAPITAL LETTER T WITH COMMA BELOW", 0x31, "Latin_Ext_B"),
    c(0x021B, None, "LATIN SMALL LETTER T WITH COMMA BELOW", 0x31, "Latin_Ext_B"),
    c(0x021C, None, "LATIN CAPITAL LETTER YOGH", 0x31, "Latin_Ext_B"),
    c(0x021D, None, "LATIN SMALL LETTER YOGH", 0x31, "Latin_Ext_B"),
    c(0x021E, None, "LATIN CAPITAL LETTER H WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x021F, None, "LATIN SMALL LETTER H WITH CARON", 0x31, "Latin_Ext_B"),
    c(0x0220, None, "LATIN CAPITAL LETTER N WITH LONG RIGHT LEG", 0x31, "Latin_Ext_B"),
    c(0x0221, None, "LATIN SMALL LETTER D WITH CURL", 0x31, "Latin_Ext_B"),
    c(0x0222, None, "LATIN CAPITAL LETTER OU", 0x31, "Latin_Ext_B"),
    c(0x0223, None, "LATIN SMALL LETTER OU", 0x31, "Latin_Ext_B"),
    c(0x0224, None, "LATIN CAPITAL LETTER Z WITH HOOK", 0x31, "Latin_Ext_B"),
    c(0x0225, None, "LATIN SMALL LETTER Z WITH HOOK", 0x31, "Latin_Ext_B"),
    c(0x0226, None, "LATIN CAPITAL LETTER A WITH DOT ABOVE", 0x31, "Latin_Ext_B"),
    c(0x0227, None, "LATIN SMALL LETTER A WITH DOT ABOVE", 0x31, "Latin_Ext_B"),
    c(0x0228, None, "LATIN CAPITAL LETTER E WITH CEDILLA", 0x31, "Latin_Ext_B"),
    c(0x0229, None, "LATIN SMALL LETTER E WITH CEDILLA", 0x31, "Latin_Ext_B"),
    c(0x022A, None, "LATIN CAPITAL LETTER O WITH DIAERESIS AND MACRON", 0x31, "Latin_Ext_B"),
    c(0x022B, None, "LATIN SMALL LETTER O WITH DIAERESIS AND MACRON", 0x31, "Latin_Ext_B"),
    c(0x022C, None, "LATIN CAPITAL LETTER O WITH TILDE AND MACRON", 0x31, "Latin_Ext_B"),
    c(0x022D, None, "LATIN SMALL LETTER O WITH TILDE AND MACRON", 0x31, "Latin_Ext_B"),
    c(0x022E, None, "LATIN CAPITAL LETTER O WITH DOT ABOVE", 0x31, "Latin_Ext_B"),
    c(0x022F, None, "LATIN SMALL LETTER O WITH DOT ABOVE", 0x31, "Latin_Ext_B"),
    c(0x0230, None, "LATIN CAPITAL LETTER O WITH DOT ABOVE AND MACRON", 0x31, "Latin_Ext_B"),
    c(0x0231, None, "LATIN SMALL LETTER O WITH DOT ABOVE AND MACRON", 0x31, "Latin_Ext_B"),
    c(0x0232, None, "LATIN CAPITAL LETTER Y WITH MACRON", 0x31, "Latin_Ext_B"),
    c(0x0233, None, "LATIN SMALL LETTER Y WITH MACRON", 0x31, "Latin_Ext_B"),
    c(0x0234, None, "LATIN SMALL LETTER L WITH CURL", 0x31, "Latin_Ext_B"),
    c(0x0235, None, "LATIN SMALL LETTER N WITH CURL", 0x31, "Latin_Ext_B"),
    c(0x0236, None, "LATIN SMALL LETTER T WITH CURL", 0x31, "Latin_Ext_B"),
    c(0x0237, None, "LATIN SMALL LETTER DOTLESS J", 0x31, "Latin_Ext_B"),
    c(0x0238, None, "LATIN SMALL LETTER DB DIGRAPH", 0x31, "Latin_Ext_B"),
    c(0x0239, None, "LATIN SMALL LETTER QP DIGRAPH", 0x31, "Latin_Ext_B"),
    c(0x023A, None, "LATIN CAPITAL LETTER A WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x023B, None, "LATIN CAPITAL LETTER C WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x023C, None, "LATIN SMALL LETTER C WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x023D, None, "LATIN CAPITAL LETTER L WITH BAR", 0x31, "Latin_Ext_B"),
    c(0x023E, None, "LATIN CAPITAL LETTER T WITH DIAGONAL STROKE", 0x31, "Latin_Ext_B"),
    c(0x023F, None, "LATIN SMALL LETTER S WITH SWASH TAIL", 0x31, "Latin_Ext_B"),
    c(0x0240, None, "LATIN SMALL LETTER Z WITH SWASH TAIL", 0x31, "Latin_Ext_B"),
    c(0x0241, None, "LATIN CAPITAL LETTER GLOTTAL STOP", 0x31, "Latin_Ext_B"),
    c(0x0242, None, "LATIN SMALL LETTER GLOTTAL STOP", 0x31, "Latin_Ext_B"),
    c(0x0243, None, "LATIN CAPITAL LETTER B WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x0244, None, "LATIN CAPITAL LETTER U BAR", 0x31, "Latin_Ext_B"),
    c(0x0245, None, "LATIN CAPITAL LETTER TURNED V", 0x31, "Latin_Ext_B"),
    c(0x0246, None, "LATIN CAPITAL LETTER E WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x0247, None, "LATIN SMALL LETTER E WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x0248, None, "LATIN CAPITAL LETTER J WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x0249, None, "LATIN SMALL LETTER J WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x024A, None, "LATIN CAPITAL LETTER SMALL Q WITH HOOK TAIL", 0x31, "Latin_Ext_B"),
    c(0x024B, None, "LATIN SMALL LETTER Q WITH HOOK TAIL", 0x31, "Latin_Ext_B"),
    c(0x024C, None, "LATIN CAPITAL LETTER R WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x024D, None, "LATIN SMALL LETTER R WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x024E, None, "LATIN CAPITAL LETTER Y WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x024F, None, "LATIN SMALL LETTER Y WITH STROKE", 0x31, "Latin_Ext_B"),
    c(0x0250, None, "LATIN SMALL LETTER TURNED A", 0x31, "IPA_Ext"),
    c(0x0251, None, "LATIN SMALL LETTER ALPHA", 0x31, "IPA_Ext"),
    c(0x0252, None, "LATIN SMALL LETTER TURNED ALPHA", 0x31, "IPA_Ext"),
    c(0x0253, None, "LATIN SMALL LETTER B WITH HOOK", 0x31, "IPA_Ext"),
    c(0x0254, None, "LATIN SMALL LETTER OPEN O", 0x31, "IPA_Ext"),
    c(0x0255, None, "LATIN SMALL LETTER C WITH CURL", 0x31, "IPA_Ext"),
    c(0x0256, None, "LATIN SMALL LETTER D WITH TAIL", 0x31, "IPA_Ext"),
    c(0x0257, None, "LATIN SMALL LETTER D WITH HOOK", 0x31, "IPA_Ext"),
    c(0x0258, None, "LATIN SMALL LETTER REVERSED E", 0x31, "IPA_Ext"),
    c(0x0259, None, "LATIN SMALL LETTER SCHWA", 0x31, "IPA_Ext"),
    c(0x025A, None, "LATIN SMALL LETTER SCHWA WITH HOOK", 0x31, "IPA_Ext"),
    c(0x025B, None, "LATIN SMALL LETTER OPEN E", 0x31, "IPA_Ext"),
    c(0x025C, None, "LATIN SMALL LETTER REVERSED OPEN E", 0x31, "IPA_Ext"),
    c(0x025D, None, "LATIN SMALL LETTER REVERSED OPEN E WITH HOOK", 0x31, "IPA_Ext"),
    c(0x025E, None, "LATIN SMALL LETTER CLOSED REVERSED OPEN E", 0x31, "IPA_Ext"),
    c(0x025F, None, "LATIN SMALL LETTER DOTLESS J WITH STROKE", 0x31, "IPA_Ext"),
    c(0x0260, None, "LATIN SMALL LETTER G WITH HOOK", 0x31, "IPA_Ext"),
    c(0x0261, None, "LATIN SMALL LETTER SCRIPT G", 0x31, "IPA_Ext"),
    c(0x0262, None, "LATIN LETTER SMALL CAPITAL G", 0x31, "IPA_Ext"),
    c(0x0263, None, "LATIN SMALL LETTER GAMMA", 0x31, "IPA_Ext"),
    c(0x0264, None, "LATIN SMALL LETTER RAMS HORN", 0x31, "IPA_Ext"),
    c(0x0265, None, "LATIN SMALL LETTER TURNED H", 0x31, "IPA_Ext"),
    c(0x0266, None, "LATIN SMALL LETTER H WITH HOOK", 0x31, "IPA_Ext"),
    c(0x0267, None, "LATIN SMALL LETTER HENG WITH HOOK", 0x31, "IPA_Ext"),
    c(0x0268, None, "LATIN SMALL LETTER I WITH STROKE", 0x31, "IPA_Ext"),
    c(0x0269, None, "LATIN SMALL LETTER IOTA", 0x31, "IPA_Ext"),
    c(0x026A, None, "LATIN LETTER SMALL CAPITAL I", 0x31, "IPA_Ext"),
    c(0x026B, None, "LATIN SMALL LETTER L WITH MIDDLE TILDE", 0x31, "IPA_Ext"),
    c(0x026C, None, "LATIN SMALL LETTER L WITH BELT", 0x31, "IPA_Ext"),
    c(0x026D, None, "LATIN SMALL LETTER L WITH RETROFLEX HOOK", 0x31, "IPA_Ext"),
    c(0x026E, None, "LATIN SMALL LETTER LEZH", 0x31, "IPA_Ext"),
    c(0x026F, None, "LATIN SMALL LETTER TURNED M", 0x31, "IPA_Ext"),
    c(0x0270, None, "LATIN SMALL LETTER TURNED M WITH LONG LEG", 0x31, "IPA_Ext"),
    c(0x0271, None, "LATIN SMALL LETTER M WITH HOOK", 0x31, "IPA_Ext"),
    c(0x0272, None, "LATIN SMALL LETTER N WITH LEFT HOOK", 0x31, "IPA_Ext"),
    c(0x0273, None, "LATIN SMALL LETTER N WITH RETROFLEX HOOK", 0x31, "IPA_Ext"),
    c(0x0274, None, "LATIN LETTER SMALL CAPITAL N", 0x31, "IPA_Ext"),
    c(0x0275, None, "LATIN SMALL LETTER BARRED O", 0x31, "IPA_Ext"),
    c(0x0276, None, "LATIN LETTER SMALL CAPITAL OE", 0x31, "IPA_Ext"),
    c(0x0277, None, "LATIN SMALL LETTER CLOSED OMEGA", 0x31, "IPA_Ext"),
    c(0x0278, None, "LATIN SMALL LETTER PHI", 0x31, "IPA_Ext"),
    c(0x0279, None, "LATIN SMALL LETTER TURNED R", 0x31, "IPA_Ext"),
    c(0x027A, None, "LATIN SMALL LETTER TURNED R WITH LONG LEG", 0x31, "IPA_Ext"),
    c(0x027B, None, "LATIN SMALL LETTER TURNED R WITH HOOK", 0x31, "IPA_Ext"),
    c(0x027C, None, "LATIN SMALL LETTER R WITH LONG LEG", 0x31, "IPA_Ext"),
    c(0x027D, None, "LATIN SMALL LETTER R WITH TAIL", 0x31, "IPA_Ext"),
    c(0x027E, None, "LATIN SMALL LETTER R WITH FISHHOOK", 0x31, "IPA_Ext"),
    c(0x027F, None, "LATIN SMALL LETTER REVERSED R WITH FISHHOOK", 0x31, "IPA_Ext"),
    c(0x0280, None, "LATIN LETTER SMALL CAPITAL R", 0x31, "IPA_Ext"),
    c(0x0281, None, "LATIN LETTER SMALL CAPITAL INVERTED R", 0x31, "IPA_Ext"),
    c(0x0282, None, "LATIN SMALL LETTER S WITH HOOK", 0x31, "IPA_Ext"),
    c(0x0283, None, "LATIN SMALL LETTER ESH", 0x31, "IPA_Ext"),
    c(0x0284, None, "LATIN SMALL LETTER DOTLESS J WITH STROKE AND HOOK", 0x31, "IPA_Ext"),
    c(0x0285, None, "LATIN SMALL LETTER SQUAT REVERSED ESH", 0x31, "IPA_Ext"),
    c(0x0286, None, "LATIN SMALL LETTER ESH WITH CURL", 0x31, "IPA_Ext"),
    c(0x0287, None, "LATIN SMALL LETTER TURNED T", 0x31, "IPA_Ext"),
    c(0x0288, None, "LATIN SMALL LETTER T WITH RETROFLEX HOOK", 0x31, "IPA_Ext"),
    c(0x0289, None, "LATIN SMALL LETTER U BAR", 0x31, "IPA_Ext"),
    c(0x028A, None, "LATIN SMALL LETTER UPSILON", 0x31, "IPA_Ext"),
    c(0x028B, None, "LATIN SMALL LETTER V WITH HOOK", 0x31, "IPA_Ext"),
    c(0x028C, None, "LATIN SMALL LETTER TURNED V", 0x31, "IPA_Ext"),
    c(0x028D, None, "LATIN SMALL LETTER TURNED W", 0x31, "IPA_Ext"),
    c(0x028E, None, "LATIN SMALL LETTER TURNED Y", 0x31, "IPA_Ext"),
    c(0x028F, None, "LATIN LETTER SMALL CAPITAL Y", 0x31, "IPA_Ext"),
    c(0x0290, None, "LATIN SMALL LETTER Z WITH RETROFLEX HOOK", 0x31, "IPA_Ext"),
    c(0x0291, None, "LATIN SMALL LETTER Z WITH CURL", 0x31, "IPA_Ext"),
    c(0x0292, None, "LATIN SMALL LETTER EZH", 0x31, "IPA_Ext"),
    c(0x0293, None, "LATIN SMALL LETTER EZH WITH CURL", 0x31, "IPA_Ext"),
    c(0x0294, None, "LATIN LETTER GLOTTAL STOP", 0x31, "IPA_Ext"),
    c(0x0295, None, "LATIN LETTER PHARYNGEAL VOICED FRICATIVE", 0x31, "IPA_Ext"),
    c(0x0296, None, "LATIN LETTER INVERTED GLOTTAL STOP", 0x31, "IPA_Ext"),
    c(0x0297, None, "LATIN LETTER STRETCHED C", 0x31, "IPA_Ext"),
    c(0x0298, None, "LATIN LETTER BILABIAL CLICK", 0x31, "IPA_Ext"),
    c(0x0299, None, "LATIN LETTER SMALL CAPITAL B", 0x31, "IPA_Ext"),
    c(0x029A, None, "LATIN SMALL LETTER CLOSED OPEN E", 0x31, "IPA_Ext"),
    c(0x029B, None, "LATIN LETTER SMALL CAPITAL G WITH HOOK", 0x31, "IPA_Ext"),
    c(0x029C, None, "LATIN LETTER SMALL CAPITAL H", 0x31, "IPA_Ext"),
    c(0x029D, None, "LATIN SMALL LETTER J WITH CROSSED-TAIL", 0x31, "IPA_Ext"),
    c(0x029E, None, "LATIN SMALL LETTER TURNED K", 0x31, "IPA_Ext"),
    c(0x029F, None, "LATIN LETTER SMALL CAPITAL L", 0x31, "IPA_Ext"),
    c(0x02A0, None, "LATIN SMALL LETTER Q WITH HOOK", 0x31, "IPA_Ext"),
    c(0x02A1, None, "LATIN LETTER GLOTTAL STOP WITH STROKE", 0x31, "IPA_Ext"),
    c(0x02A2, None, "LATIN LETTER REVERSED GLOTTAL STOP WITH STROKE", 0x31, "IPA_Ext"),
    c(0x02A3, None, "LATIN SMALL LETTER DZ DIGRAPH", 0x31, "IPA_Ext"),
    c(0x02A4, None, "LATIN SMALL LETTER DEZH DIGRAPH", 0x31, "IPA_Ext"),
    c(0x02A5, None, "LATIN SMALL LETTER DZ DIGRAPH WITH CURL", 0x31, "IPA_Ext"),
    c(0x02A6, None, "LATIN SMALL LETTER TS DIGRAPH", 0x31, "IPA_Ext"),
    c(0x02A7, None, "LATIN SMALL LETTER TESH DIGRAPH", 0x31, "IPA_Ext"),
    c(0x02A8, None, "LATIN SMALL LETTER TC DIGRAPH WITH CURL", 0x31, "IPA_Ext"),
    c(0x02A9, None, "LATIN SMALL LETTER FENG DIGRAPH", 0x31, "IPA_Ext"),
    c(0x02AA, None, "LATIN SMALL LETTER LS DIGRAPH", 0x31, "IPA_Ext"),
    c(0x02AB, None, "LATIN SMALL LETTER LZ DIGRAPH", 0x31, "IPA_Ext"),
    c(0x02AC, None, "LATIN LETTER BILABIAL PERCUSSIVE", 0x31, "IPA_Ext"),
    c(0x02AD, None, "LATIN LETTER BIDENTAL PERCUSSIVE", 0x31, "IPA_Ext"),
    c(0x02AE, None, "LATIN SMALL LETTER TURNED H WITH FISHHOOK", 0x31, "IPA_Ext"),
    c(0x02AF, None, "LATIN SMALL LETTER TURNED H WITH FISHHOOK AND TAIL", 0x31, "IPA_Ext"),
    c(0x02B0, None, "MODIFIER LETTER SMALL H", 0x31, "Modifier_Letters"),
    c(0x02B1, None, "MODIFIER LETTER SMALL H WITH HOOK", 0x31, "Modifier_Letters"),
    c(0x02B2, None, "MODIFIER LETTER SMALL J", 0x31, "Modifier_Letters"),
    c(0x02B3, None, "MODIFIER LETTER SMALL R", 0x31, "Modifier_Letters"),
    c(0x02B4, None, "MODIFIER LETTER SMALL TURNED R", 0x31, "Modifier_Letters"),
    c(0x02B5, None, "MODIFIER LETTER SMALL TURNED R WITH HOOK", 0x31, "Modifier_Letters"),
    c(0x02B6, None, "MODIFIER LETTER SMALL CAPITAL INVERTED R", 0x31, "Modifier_Letters"),
    c(0x02B7, None, "MODIFIER LETTER SMALL W", 0x31, "Modifier_Letters"),
    c(0x02B8, None, "MODIFIER LETTER SMALL Y", 0x31, "Modifier_Letters"),
    c(0x02B9, None, "MODIFIER LETTER PRIME", 0x31, "Modifier_Letters"),
    c(0x02BA, None, "MODIFIER LETTER DOUBLE PRIME", 0x31, "Modifier_Letters"),
    c(0x02BB, None, "MODIFIER LETTER TURNED COMMA", 0x31, "Modifier_Letters"),
    c(0x02BC, None, "MODIFIER LETTER APOSTROPHE", 0x31, "Modifier_Letters"),
    c(0x02BD, None, "MODIFIER LETTER REVERSED COMMA", 0x31, "Modifier_Letters"),
    c(0x02BE, None, "MODIFIER LETTER RIGHT HALF RING", 0x31, "Modifier_Letters"),
    c(0x02BF, None, "MODIFIER LETTER LEFT HALF RING", 0x31, "Modifier_Letters"),
    c(0x02C0, None, "MODIFIER LETTER GLOTTAL STOP", 0x31, "Modifier_Letters"),
    c(0x02C1, None, "MODIFIER LETTER REVERSED GLOTTAL STOP", 0x31, "Modifier_Letters"),
    c(0x02C2, None, "MODIFIER LETTER LEFT ARROWHEAD", 0x00, "Modifier_Letters"),
    c(0x02C3, None, "MODIFIER LETTER RIGHT ARROWHEAD", 0x00, "Modifier_Letters"),
    c(0x02C4, None, "MODIFIER LETTER UP ARROWHEAD", 0x00, "Modifier_Letters"),
    c(0x02C5, None, "MODIFIER LETTER DOWN ARROWHEAD", 0x00, "Modifier_Letters"),
    c(0x02C6, None, "MODIFIER LETTER CIRCUMFLEX ACCENT", 0x31, "Modifier_Letters"),
    c(0x02C7, None, "CARON", 0x31, "Modifier_Letters"),
    c(0x02C8, None, "MODIFIER LETTER VERTICAL LINE", 0x31, "Modifier_Letters"),
    c(0x02C9, None, "MODIFIER LETTER MACRON", 0x31, "Modifier_Letters"),
    c(0x02CA, None, "MODIFIER LETTER ACUTE ACCENT", 0x31, "Modifier_Letters"),
    c(0x02CB, None, "MODIFIER LETTER GRAVE ACCENT", 0x31, "Modifier_Letters"),
    c(0x02CC, None, "MODIFIER LETTER LOW VERTICAL LINE", 0x31, "Modifier_Letters"),
    c(0x02CD, None, "MODIFIER LETTER LOW MACRON", 0x31, "Modifier_Letters"),
    c(0x02CE, None, "MODIFIER LETTER LOW GRAVE ACCENT", 0x31, "Modifier_Letters"),
    c(0x02CF, None, "MODIFIER LETTER LOW ACUTE ACCENT", 0x31, "Modifier_Letters"),
    c(0x02D0, None, "MODIFIER LETTER TRIANGULAR COLON", 0x31, "Modifier_Letters"),
    c(0x02D1, None, "MODIFIER LETTER HALF TRIANGULAR COLON", 0x31, "Modifier_Letters"),
    c(0x02D2, None, "MODIFIER LETTER CENTRED RIGHT HALF RING", 0x00, "Modifier_Letters"),
    c(0x02D3, None, "MODIFIER LETTER CENTRED LEFT HALF RING", 0x00, "Modifier_Letters"),
    c(0x02D4, None, "MODIFIER LETTER UP TACK", 0x00, "Modifier_Letters"),
    c(0x02D5, None, "MODIFIER LETTER DOWN TACK", 0x00, "Modifier_Letters"),
    c(0x02D6, None, "MODIFIER LETTER PLUS SIGN", 0x00, "Modifier_Letters"),
    c(0x02D7, None, "MODIFIER LETTER MINUS SIGN", 0x00, "Modifier_Letters"),
    c(0x02D8, None, "BREVE", 0x00, "Modifier_Letters"),
    c(0x02D9, None, "DOT ABOVE", 0x00, "Modifier_Letters"),
    c(0x02DA, None, "RING ABOVE", 0x00, "Modifier_Letters"),
    c(0x02DB, None, "OGONEK", 0x00, "Modifier_Letters"),
    c(0x02DC, None, "SMALL TILDE", 0x00, "Modifier_Letters"),
    c(0x02DD, None, "DOUBLE ACUTE ACCENT", 0x00, "Modifier_Letters"),
    c(0x02DE, None, "MODIFIER LETTER RHOTIC HOOK", 0x00, "Modifier_Letters"),
    c(0x02DF, None, "MODIFIER LETTER CROSS ACCENT", 0x00, "Modifier_Letters"),
    c(0x02E0, None, "MODIFIER LETTER SMALL GAMMA", 0x31, "Modifier_Letters"),
    c(0x02E1, None, "MODIFIER LETTER SMALL L", 0x31, "Modifier_Letters"),
    c(0x02E2, None, "MODIFIER LETTER SMALL S", 0x31, "Modifier_Letters"),
    c(0x02E3, None, "MODIFIER LETTER SMALL X", 0x31, "Modifier_Letters"),
    c(0x02E4, None, "MODIFIER LETTER SMALL REVERSED GLOTTAL STOP", 0x31, "Modifier_Letters"),
    c(0x02E5, None, "MODIFIER LETTER EXTRA-HIGH TONE BAR", 0x00, "Modifier_Letters"),
    c(0x02E6, None, "MODIFIER LETTER HIGH TONE BAR", 0x00, "Modifier_Letters"),
    c(0x02E7, None, "MODIFIER LETTER MID TONE BAR", 0x00, "Modifier_Letters"),
    c(0x02E8, None, "MODIFIER LETTER LOW TONE BAR", 0x00, "Modifier_Letters"),
    c(0x02E9, None, "MODIFIER LETTER EXTRA-LOW TONE BAR", 0x00, "Modifier_Letters"),
    c(0x02EA, None, "MODIFIER LETTER YIN DEPARTING TONE MARK", 0x00, "Modifier_Letters"),
    c(0x02EB, None, "MODIFIER LETTER YANG DEPARTING TONE MARK", 0x00, "Modifier_Letters"),
    c(0x02EC, None, "MODIFIER LETTER VOICING", 0x31, "Modifier_Letters"),
    c(0x02ED, None, "MODIFIER LETTER UNASPIRATED", 0x00, "Modifier_Letters"),
    c(0x02EE, None, "MODIFIER LETTER DOUBLE APOSTROPHE", 0x31, "Modifier_Letters"),
    c(0x02EF, None, "MODIFIER LETTER LOW DOWN ARROWHEAD", 0x00, "Modifier_Letters"),
    c(0x02F0, None, "MODIFIER LETTER LOW UP ARROWHEAD", 0x00, "Modifier_Letters"),
    c(0x02F1, None, "MODIFIER LETTER LOW LEFT ARROWHEAD", 0x00, "Modifier_Letters"),
    c(0x02F2, None, "MODIFIER LETTER LOW RIGHT ARROWHEAD", 0x00, "Modifier_Letters"),
    c(0x02F3, None, "MODIFIER LETTER LOW RING", 0x00, "Modifier_Letters"),
    c(0x02F4, None, "MODIFIER LETTER MIDDLE GRAVE ACCENT", 0x00, "Modifier_Letters"),
    c(0x02F5, None, "MODIFIER LETTER MIDDLE DOUBLE GRAVE ACCENT", 0x00, "Modifier_Letters"),
    c(0x02F6, None, "MODIFIER LETTER MIDDLE DOUBLE ACUTE ACCENT", 0x00, "Modifier_Letters"),
    c(0x02F7, None, "MODIFIER LETTER LOW TILDE", 0x00, "Modifier_Letters"),
    c(0x02F8, None, "MODIFIER LETTER RAISED COLON", 0x00, "Modifier_Letters"),
    c(0x02F9, None, "MODIFIER LETTER BEGIN HIGH TONE", 0x00, "Modifier_Letters"),
    c(0x02FA, None, "MODIFIER LETTER END HIGH TONE", 0x00, "Modifier_Letters"),
    c(0x02FB, None, "MODIFIER LETTER BEGIN LOW TONE", 0x00, "Modifier_Letters"),
    c(0x02FC, None, "MODIFIER LETTER END LOW TONE", 0x00, "Modifier_Letters"),
    c(0x02FD, None, "MODIFIER LETTER SHELF", 0x00, "Modifier_Letters"),
    c(0x02FE, None, "MODIFIER LETTER OPEN SHELF", 0x00, "Modifier_Letters"),
    c(0x02FF, None, "MODIFIER LETTER LOW LEFT ARROW", 0x00, "Modifier_Letters"),
    c(0x0300, None, "COMBINING GRAVE ACCENT", 0x20, "Diacriticals"),
    c(0x0301, None, "COMBINING ACUTE ACCENT", 0x20, "Diacriticals"),
    c(0x0302, None, "COMBINING CIRCUMFLEX ACCENT", 0x20, "Diacriticals"),
    c(0x0303, None, "COMBINING TILDE", 0x20, "Diacriticals"),
    c(0x0304, None, "COMBINING MACRON", 0x20, "Diacriticals"),
    c(0x0305, None, "COMBINING OVERLINE", 0x20, "Diacriticals"),
    c(0x0306, None, "COMBINING BREVE", 0x20, "Diacriticals"),
    c(0x0307, None, "COMBINING DOT ABOVE", 0x20, "Diacriticals"),
    c(0x0308, None, "COMBINING DIAERESIS", 0x20, "Diacriticals"),
    c(0x0309, None, "COMBINING HOOK ABOVE", 0x20, "Diacriticals"),
    c(0x030A, None, "COMBINING RING ABOVE", 0x20, "Diacriticals"),
    c(0x030B, None, "COMBINING DOUBLE ACUTE ACCENT", 0x20, "Diacriticals"),
    c(0x030C, None, "COMBINING CARON", 0x20, "Diacriticals"),
    c(0x030D, None, "COMBINING VERTICAL LINE ABOVE", 0x20, "Diacriticals"),
    c(0x030E, None, "COMBINING DOUBLE VERTICAL LINE ABOVE", 0x20, "Diacriticals"),
    c(0x030F, None, "COMBINING DOUBLE GRAVE ACCENT", 0x20, "Diacriticals"),
    c(0x0310, None, "COMBINING CANDRABINDU", 0x20, "Diacriticals"),
    c(0x0311, None, "COMBINING INVERTED BREVE", 0x20, "Diacriticals"),
    c(0x0312, None, "COMBINING TURNED COMMA ABOVE", 0x20, "Diacriticals"),
    c(0x0313, None, "COMBINING COMMA ABOVE", 0x20, "Diacriticals"),
    c(0x0314, None, "COMBINING REVERSED COMMA ABOVE", 0x20, "Diacriticals"),
    c(0x0315, None, "COMBINING COMMA ABOVE RIGHT", 0x20, "Diacriticals"),
    c(0x0316, None, "COMBINING GRAVE ACCENT BELOW", 0x20, "Diacriticals"),
    c(0x0317, None, "COMBINING ACUTE ACCENT BELOW", 0x20, "Diacriticals"),
    c(0x0318, None, "COMBINING LEFT TACK BELOW", 0x20, "Diacriticals"),
    c(0x0319, None, "COMBINING RIGHT TACK BELOW", 0x20, "Diacriticals"),
    c(0x031A, None, "COMBINING LEFT ANGLE ABOVE", 0x20, "Diacriticals"),
    c(0x031B, None, "COMBINING HORN", 0x20, "Diacriticals"),
    c(0x031C, None, "COMBINING LEFT HALF RING BELOW", 0x20, "Diacriticals"),
    c(0x031D, None, "COMBINING UP TACK BELOW", 0x20, "Diacriticals"),
    c(0x031E, None, "COMBINING DOWN TACK BELOW", 0x20, "Diacriticals"),
    c(0x031F, None, "COMBINING PLUS SIGN BELOW", 0x20, "Diacriticals"),
    c(0x0320, None, "COMBINING MINUS SIGN BELOW", 0x20, "Diacriticals"),
    c(0x0321, None, "COMBINING PALATALIZED HOOK BELOW", 0x20, "Diacriticals"),
    c(0x0322, None, "COMBINING RETROFLEX HOOK BELOW", 0x20, "Diacriticals"),
    c(0x0323, None, "COMBINING DOT BELOW", 0x20, "Diacriticals"),
    c(0x0324, None, "COMBINING DIAERESIS BELOW", 0x20, "Diacriticals"),
    c(0x0325, None, "COMBINING RING BELOW", 0x20, "Diacriticals"),
    c(0x0326, None, "COMBINING COMMA BELOW", 0x20, "Diacriticals"),
    c(0x0327, None, "COMBINING CEDILLA", 0x20, "Diacriticals"),
    c(0x0328, None, "COMBINING OGONEK", 0x20, "Diacriticals"),
    c(0x0329, None, "COMBINING VERTICAL LINE BELOW", 0x20, "Diacriticals"),
    c(0x032A, None, "COMBINING BRIDGE BELOW", 0x20, "Diacriticals"),
    c(0x032B, None, "COMBINING INVERTED DOUBLE ARCH BELOW", 0x20, "Diacriticals"),
    c(0x032C, None, "COMBINING CARON BELOW", 0x20, "Diacriticals"),
    c(0x032D, None, "COMBINING CIRCUMFLEX ACCENT BELOW", 0x20, "Diacriticals"),
    c(0x032E, None, "COMBINING BREVE BELOW", 0x20, "Diacriticals"),
    c(0x032F, None, "COMBINING INVERTED BREVE BELOW", 0x20, "Diacriticals"),
    c(0x0330, None, "COMBINING TILDE BELOW", 0x20, "Diacriticals"),
    c(0x0331, None, "COMBINING MACRON BELOW", 0x20, "Diacriticals"),
    c(0x0332, None, "COMBINING LOW LINE", 0x20, "Diacriticals"),
    c(0x0333, None, "COMBINING DOUBLE LOW LINE", 0x20, "Diacriticals"),
    c(0x0334, None, "COMBINING TILDE OVERLAY", 0x20, "Diacriticals"),
    c(0x0335, None, "COMBINING SHORT STROKE OVERLAY", 0x20, "Diacriticals"),
    c(0x0336, None, "COMBINING LONG STROKE OVERLAY", 0x20, "Diacriticals"),
    c(0x0337, None, "COMBINING SHORT SOLIDUS OVERLAY", 0x20, "Diacriticals"),
    c(0x0338, None, "COMBINING LONG SOLIDUS OVERLAY", 0x20, "Diacriticals"),
    c(0x0339, None, "COMBINING RIGHT HALF RING BELOW", 0x20, "Diacriticals"),
    c(0x033A, None, "COMBINING INVERTED BRIDGE BELOW", 0x20, "Diacriticals"),
    c(0x033B, None, "COMBINING SQUARE BELOW", 0x20, "Diacriticals"),
    c(0x033C, None, "COMBINING SEAGULL BELOW", 0x20, "Diacriticals"),
    c(0x033D, None, "COMBINING X ABOVE", 0x20, "Diacriticals"),
    c(0x033E, None, "COMBINING VERTICAL TILDE", 0x20, "Diacriticals"),
    c(0x033F, None, "COMBINING DOUBLE OVERLINE", 0x20, "Diacriticals"),
    c(0x0340, None, "COMBINING GRAVE TONE MARK", 0x20, "Diacriticals"),
    c(0x0341, None, "COMBINING ACUTE TONE MARK", 0x20, "Diacriticals"),
    c(0x0342, None, "COMBINING GREEK PERISPOMENI", 0x20, "Diacriticals"),
    c(0x0343, None, "COMBINING GREEK KORONIS", 0x20, "Diacriticals"),
    c(0x0344, None, "COMBINING GREEK DIALYTIKA TONOS", 0x20, "Diacriticals"),
    c(0x0345, None, "COMBINING GREEK YPOGEGRAMMENI", 0x21, "Diacriticals"),
    c(0x0346, None, "COMBINING BRIDGE ABOVE", 0x20, "Diacriticals"),
    c(0x0347, None, "COMBINING EQUALS SIGN BELOW", 0x20, "Diacriticals"),
    c(0x0348, None, "COMBINING DOUBLE VERTICAL LINE BELOW", 0x20, "Diacriticals"),
    c(0x0349, None, "COMBINING LEFT ANGLE BELOW", 0x20, "Diacriticals"),
    c(0x034A, None, "COMBINING NOT TILDE ABOVE", 0x20, "Diacriticals"),
    c(0x034B, None, "COMBINING HOMOTHETIC ABOVE", 0x20, "Diacriticals"),
    c(0x034C, None, "COMBINING ALMOST EQUAL TO ABOVE", 0x20, "Diacriticals"),
    c(0x034D, None, "COMBINING LEFT RIGHT ARROW BELOW", 0x20, "Diacriticals"),
    c(0x034E, None, "COMBINING UPWARDS ARROW BELOW", 0x20, "Diacriticals"),
    c(0x034F, None, "COMBINING GRAPHEME JOINER", 0x20, "Diacriticals"),
    c(0x0350, None, "COMBINING RIGHT ARROWHEAD ABOVE", 0x20, "Diacriticals"),
    c(0x0351, None, "COMBINING LEFT HALF RING ABOVE", 0x20, "Diacriticals"),
    c(0x0352, None, "COMBINING FERMATA", 0x20, "Diacriticals"),
    c(0x0353, None, "COMBINING X BELOW", 0x20, "Diacriticals"),
    c(0x0354, None, "COMBINING LEFT ARROWHEAD BELOW", 0x20, "Diacriticals"),
    c(0x0355, None, "COMBINING RIGHT ARROWHEAD BELOW", 0x20, "Diacriticals"),
    c(0x0356, None, "COMBINING RIGHT ARROWHEAD AND UP ARROWHEAD BELOW", 0x20, "Diacriticals"),
    c(0x0357, None, "COMBINING RIGHT HALF RING ABOVE", 0x20, "Diacriticals"),
    c(0x0358, None, "COMBINING DOT ABOVE RIGHT", 0x20, "Diacriticals"),
    c(0x0359, None, "COMBINING ASTERISK BELOW", 0x20, "Diacriticals"),
    c(0x035A, None, "COMBINING DOUBLE RING BELOW", 0x20, "Diacriticals"),
    c(0x035B, None, "COMBINING ZIGZAG ABOVE", 0x20, "Diacriticals"),
    c(0x035C, None, "COMBINING DOUBLE BREVE BELOW", 0x20, "Diacriticals"),
    c(0x035D, None, "COMBINING DOUBLE BREVE", 0x20, "Diacriticals"),
    c(0x035E, None, "COMBINING DOUBLE MACRON", 0x20, "Diacriticals"),
    c(0x035F, None, "COMBINING DOUBLE MACRON BELOW", 0x20, "Diacriticals"),
    c(0x0360, None, "COMBINING DOUBLE TILDE", 0x20, "Diacriticals"),
    c(0x0361, None, "COMBINING DOUBLE INVERTED BREVE", 0x20, "Diacriticals"),
    c(0x0362, None, "COMBINING DOUBLE RIGHTWARDS ARROW BELOW", 0x20, "Diacriticals"),
    c(0x0363, None, "COMBINING LATIN SMALL LETTER A", 0x20, "Diacriticals"),
    c(0x0364, None, "COMBINING LATIN SMALL LETTER E", 0x20, "Diacriticals"),
    c(0x0365, None, "COMBINING LATIN SMALL LETTER I", 0x20, "Diacriticals"),
    c(0x0366, None, "COMBINING LATIN SMALL LETTER O", 0x20, "Diacriticals"),
    c(0x0367, None, "COMBINING LATIN SMALL LETTER U", 0x20, "Diacriticals"),
    c(0x0368, None, "COMBINING LATIN SMALL LETTER C", 0x20, "Diacriticals"),
    c(0x0369, None, "COMBINING LATIN SMALL LETTER D", 0x20, "Diacriticals"),
    c(0x036A, None, "COMBINING LATIN SMALL LETTER H", 0x20, "Diacriticals"),
    c(0x036B, None, "COMBINING LATIN SMALL LETTER M", 0x20, "Diacriticals"),
    c(0x036C, None, "COMBINING LATIN SMALL LETTER R", 0x20, "Diacriticals"),
    c(0x036D, None, "COMBINING LATIN SMALL LETTER T", 0x20, "Diacriticals"),
    c(0x036E, None, "COMBINING LATIN SMALL LETTER V", 0x20, "Diacriticals"),
    c(0x036F, None, "COMBINING LATIN SMALL LETTER X", 0x20, "Diacriticals"),
    c(0x0370, None, "GREEK CAPITAL LETTER HETA", 0x31, "Greek"),
    c(0x0371, None, "GREEK SMALL LETTER HETA", 0x31, "Greek"),
    c(0x0372, None, "GREEK CAPITAL LETTER ARCHAIC SAMPI", 0x31, "Greek"),
    c(0x0373, None, "GREEK SMALL LETTER ARCHAIC SAMPI", 0x31, "Greek"),
    c(0x0374, None, "GREEK NUMERAL SIGN", 0x31, "Greek"),
    c(0x0375, None, "GREEK LOWER NUMERAL SIGN", 0x00, "Greek"),
    c(0x0376, None, "GREEK CAPITAL LETTER PAMPHYLIAN DIGAMMA", 0x31, "Greek"),
    c(0x0377, None, "GREEK SMALL LETTER PAMPHYLIAN DIGAMMA", 0x31, "Greek"),
    c(0x037A, None, "GREEK YPOGEGRAMMENI", 0x01, "Greek"),
    c(0x037B, None, "GREEK SMALL REVERSED LUNATE SIGMA SYMBOL", 0x31, "Greek"),
    c(0x037C, None, "GREEK SMALL DOTTED LUNATE SIGMA SYMBOL", 0x31, "Greek"),
    c(0x037D, None, "GREEK SMALL REVERSED DOTTED LUNATE SIGMA SYMBOL", 0x31, "Greek"),
    c(0x037E, None, "GREEK QUESTION MARK", 0x00, "Greek"),
    c(0x037F, None, "GREEK CAPITAL LETTER YOT", 0x31, "Greek"),
    c(0x0384, None, "GREEK TONOS", 0x00, "Greek"),
    c(0x0385, None, "GREEK DIALYTIKA TONOS", 0x00, "Greek"),
    c(0x0386, None, "GREEK CAPITAL LETTER ALPHA WITH TONOS", 0x31, "Greek"),
    c(0x0387, None, "GREEK ANO TELEIA", 0x20, "Greek"),
    c(0x0388, None, "GREEK CAPITAL LETTER EPSILON WITH TONOS", 0x31, "Greek"),
    c(0x0389, None, "GREEK CAPITAL LETTER ETA WITH TONOS", 0x31, "Greek"),
    c(0x038A, None, "GREEK CAPITAL LETTER IOTA WITH TONOS", 0x31, "Greek"),
    c(0x038C, None, "GREEK CAPITAL LETTER OMICRON WITH TONOS", 0x31, "Greek"),
    c(0x038E, None, "GREEK CAPITAL LETTER UPSILON WITH TONOS", 0x31, "Greek"),
    c(0x038F, None, "GREEK CAPITAL LETTER OMEGA WITH TONOS", 0x31, "Greek"),
    c(0x0390, None, "GREEK SMALL LETTER IOTA WITH DIALYTIKA AND TONOS", 0x31, "Greek"),
    c(0x0391, None, "GREEK CAPITAL LETTER ALPHA", 0x31, "Greek"),
    c(0x0392, None, "GREEK CAPITAL LETTER BETA", 0x31, "Greek"),
    c(0x0393, None, "GREEK CAPITAL LETTER GAMMA", 0x31, "Greek"),
    c(0x0394, None, "GREEK CAPITAL LETTER DELTA", 0x31, "Greek"),
    c(0x0395, None, "GREEK CAPITAL LETTER EPSILON", 0x31, "Greek"),
    c(0x0396, None, "GREEK CAPITAL LETTER ZETA", 0x31, "Greek"),
    c(0x0397, None, "GREEK CAPITAL LETTER ETA", 0x31, "Greek"),
    c(0x0398, None, "GREEK CAPITAL LETTER THETA", 0x31, "Greek"),
    c(0x0399, None, "GREEK CAPITAL LETTER IOTA", 0x31, "Greek"),
    c(0x039A, None, "GREEK CAPITAL LETTER KAPPA", 0x31, "Greek"),
    c(0x039B, None, "GREEK CAPITAL LETTER LAMDA", 0x31, "Greek"),
    c(0x039C, None, "GREEK CAPITAL LETTER MU", 0x31, "Greek"),
    c(0x039D, None, "GREEK CAPITAL LETTER NU", 0x31, "Greek"),
    c(0x039E, None, "GREEK CAPITAL LETTER XI", 0x31, "Greek"),
    c(0x039F, None, "GREEK CAPITAL LETTER OMICRON", 0x31, "Greek"),
    c(0x03A0, None, "GREEK CAPITAL LETTER PI", 0x31, "Greek"),
    c(0x03A1, None, "GREEK CAPITAL LETTER RHO", 0x31, "Greek"),
    c(0x03A3, None, "GREEK CAPITAL LETTER SIGMA", 0x31, "Greek"),
    c(0x03A4, None, "GREEK CAPITAL LETTER TAU", 0x31, "Greek"),
    c(0x03A5, None, "GREEK CAPITAL LETTER UPSILON", 0x31, "Greek"),
    c(0x03A6, None, "GREEK CAPITAL LETTER PHI", 0x31, "Greek"),
    c(0x03A7, None, "GREEK CAPITAL LETTER CHI", 0x31, "Greek"),
    c(0x03A8, None, "GREEK CAPITAL LETTER PSI", 0x31, "Greek"),
    c(0x03A9, None, "GREEK CAPITAL LETTER OMEGA", 0x31, "Greek"),
    c(0x03AA, None, "GREEK CAPITAL LETTER IOTA WITH DIALYTIKA", 0x31, "Greek"),
    c(0x03AB, None, "GREEK CAPITAL LETTER UPSILON WITH DIALYTIKA", 0x31, "Greek"),
    c(0x03AC, None, "GREEK SMALL LETTER ALPHA WITH TONOS", 0x31, "Greek"),
    c(0x03AD, None, "GREEK SMALL LETTER EPSILON WITH TONOS", 0x31, "Greek"),
    c(0x03AE, None, "GREEK SMALL LETTER ETA WITH TONOS", 0x31, "Greek"),
    c(0x03AF, None, "GREEK SMALL LETTER IOTA WITH TONOS", 0x31, "Greek"),
    c(0x03B0, None, "GREEK SMALL LETTER UPSILON WITH DIALYTIKA AND TONOS", 0x31, "Greek"),
    c(0x03B1, None, "GREEK SMALL LETTER ALPHA", 0x31, "Greek"),
    c(0x03B2, None, "GREEK SMALL LETTER BETA", 0x31, "Greek"),
    c(0x03B3, None, "GREEK SMALL LETTER GAMMA", 0x31, "Greek"),
    c(0x03B4, None, "GREEK SMALL LETTER DELTA", 0x31, "Greek"),
    c(0x03B5, None, "GREEK SMALL LETTER EPSILON", 0x31, "Greek"),
    c(0x03B6, None, "GREEK SMALL LETTER ZETA", 0x31, "Greek"),
    c(0x03B7, None, "GREEK SMALL LETTER ETA", 0x31, "Greek"),
    c(0x03B8, None, "GREEK SMALL LETTER THETA", 0x31, "Greek"),
    c(0x03B9, None, "GREEK SMALL LETTER IOTA", 0x31, "Greek"),
    c(0x03BA, None, "GREEK SMALL LETTER KAPPA", 0x31, "Greek"),
    c(0x03BB, None, "GREEK SMALL LETTER LAMDA", 0x31, "Greek"),
    c(0x03BC, None, "GREEK SMALL LETTER MU", 0x31, "Greek"),
    c(0x03BD, None, "GREEK SMALL LETTER NU", 0x31, "Greek"),
    c(0x03BE, None, "GREEK SMALL LETTER XI", 0x31, "Greek"),
    c(0x03BF, None, "GREEK SMALL LETTER OMICRON", 0x31, "Greek"),
    c(0x03C0, None, "GREEK SMALL LETTER PI", 0x31, "Greek"),
    c(0x03C1, None, "GREEK SMALL LETTER RHO", 0x31, "Greek"),
    c(0x03C2, None, "GREEK SMALL LETTER FINAL SIGMA", 0x31, "Greek"),
    c(0x03C3, None, "GREEK SMALL LETTER SIGMA", 0x31, "Greek"),
    c(0x03C4, None, "GREEK SMALL LETTER TAU", 0x31, "Greek"),
    c(0x03C5, None, "GREEK SMALL LETTER UPSILON", 0x31, "Greek"),
    c(0x03C6, None, "GREEK SMALL LETTER PHI", 0x31, "Greek"),
    c(0x03C7, None, "GREEK SMALL LETTER CHI", 0x31, "Greek"),
    c(0x03C8, None, "GREEK SMALL LETTER PSI", 0x31, "Greek"),
    c(0x03C9, None, "GREEK SMALL LETTER OMEGA", 0x31, "Greek"),
    c(0x03CA, None, "GREEK SMALL LETTER IOTA WITH DIALYTIKA", 0x31, "Greek"),
    c(0x03CB, None, "GREEK SMALL LETTER UPSILON WITH DIALYTIKA", 0x31, "Greek"),
    c(0x03CC, None, "GREEK SMALL LETTER OMICRON WITH TONOS", 0x31, "Greek"),
    c(0x03CD, None, "GREEK SMALL LETTER UPSILON WITH TONOS", 0x31, "Greek"),
    c(0x03CE, None, "GREEK SMALL LETTER OMEGA WITH TONOS", 0x31, "Greek"),
    c(0x03CF, None, "GREEK CAPITAL KAI SYMBOL", 0x31, "Greek"),
    c(0x03D0, None, "GREEK BETA SYMBOL", 0x33, "Greek"),
    c(0x03D1, None, "GREEK THETA SYMBOL", 0x33, "Greek"),
    c(0x03D2, None, "GREEK UPSILON WITH HOOK SYMBOL", 0x33, "Greek"),
    c(0x03D3, None, "GREEK UPSILON WITH ACUTE AND HOOK SYMBOL", 0x31, "Greek"),
    c(0x03D4, None, "GREEK UPSILON WITH DIAERESIS AND HOOK SYMBOL", 0x31, "Greek"),
    c(0x03D5, None, "GREEK PHI SYMBOL", 0x33, "Greek"),
    c(0x03D6, None, "GREEK PI SYMBOL", 0x31, "Greek"),
    c(0x03D7, None, "GREEK KAI SYMBOL", 0x31, "Greek"),
    c(0x03D8, None, "GREEK LETTER ARCHAIC KOPPA", 0x31, "Greek"),
    c(0x03D9, None, "GREEK SMALL LETTER ARCHAIC KOPPA", 0x31, "Greek"),
    c(0x03DA, None, "GREEK LETTER STIGMA", 0x31, "Greek"),
    c(0x03DB, None, "GREEK SMALL LETTER STIGMA", 0x31, "Greek"),
    c(0x03DC, None, "GREEK LETTER DIGAMMA", 0x31, "Greek"),
    c(0x03DD, None, "GREEK SMALL LETTER DIGAMMA", 0x31, "Greek"),
    c(0x03DE, None, "GREEK LETTER KOPPA", 0x31, "Greek"),
    c(0x03DF, None, "GREEK SMALL LETTER KOPPA", 0x31, "Greek"),
    c(0x03E0, None, "GREEK LETTER SAMPI", 0x31, "Greek"),
    c(0x03E1, None, "GREEK SMALL LETTER SAMPI", 0x31, "Greek"),
    c(0x03E2, None, "COPTIC CAPITAL LETTER SHEI", 0x31, "Greek"),
    c(0x03E3, None, "COPTIC SMALL LETTER SHEI", 0x31, "Greek"),
    c(0x03E4, None, "COPTIC CAPITAL LETTER FEI", 0x31, "Greek"),
    c(0x03E5, None, "COPTIC SMALL LETTER FEI", 0x31, "Greek"),
    c(0x03E6, None, "COPTIC CAPITAL LETTER KHEI", 0x31, "Greek"),
    c(0x03E7, None, "COPTIC SMALL LETTER KHEI", 0x31, "Greek"),
    c(0x03E8, None, "COPTIC CAPITAL LETTER HORI", 0x31, "Greek"),
    c(0x03E9, None, "COPTIC SMALL LETTER HORI", 0x31, "Greek"),
    c(0x03EA, None, "COPTIC CAPITAL LETTER GANGIA", 0x31, "Greek"),
    c(0x03EB, None, "COPTIC SMALL LETTER GANGIA", 0x31, "Greek"),
    c(0x03EC, None, "COPTIC CAPITAL LETTER SHIMA", 0x31, "Greek"),
    c(0x03ED, None, "COPTIC SMALL LETTER SHIMA", 0x31, "Greek"),
    c(0x03EE, None, "COPTIC CAPITAL LETTER DEI", 0x31, "Greek"),
    c(0x03EF, None, "COPTIC SMALL LETTER DEI", 0x31, "Greek"),
    c(0x03F0, None, "GREEK KAPPA SYMBOL", 0x33, "Greek"),
    c(0x03F1, None, "GREEK RHO SYMBOL", 0x33, "Greek"),
    c(0x03F2, None, "GREEK LUNATE SIGMA SYMBOL", 0x31, "Greek"),
    c(0x03F3, None, "GREEK LETTER YOT", 0x31, "Greek"),
    c(0x03F4, None, "GREEK CAPITAL THETA SYMBOL", 0x33, "Greek"),
    c(0x03F5, None, "GREEK LUNATE EPSILON SYMBOL", 0x33, "Greek"),
    c(0x03F6, None, "GREEK REVERSED LUNATE EPSILON SYMBOL", 0x02, "Greek"),
    c(0x03F7, None, "GREEK CAPITAL LETTER SHO", 0x31, "Greek"),
    c(0x03F8, None, "GREEK SMALL LETTER SHO", 0x31, "Greek"),
    c(0x03F9, None, "GREEK CAPITAL LUNATE SIGMA SYMBOL", 0x31, "Greek"),
    c(0x03FA, None, "GREEK CAPITAL LETTER SAN", 0x31, "Greek"),
    c(0x03FB, None, "GREEK SMALL LETTER SAN", 0x31, "Greek"),
    c(0x03FC, None, "GREEK RHO WITH STROKE SYMBOL", 0x31, "Greek"),
    c(0x03FD, None, "GREEK CAPITAL REVERSED LUNATE SIGMA SYMBOL", 0x31, "Greek"),
    c(0x03FE, None, "GREEK CAPITAL DOTTED LUNATE SIGMA SYMBOL", 0x31, "Greek"),
    c(0x03FF, None, "GREEK CAPITAL REVERSED DOTTED LUNATE SIGMA SYMBOL", 0x31, "Greek"),
    c(0x0400, None, "CYRILLIC CAPITAL LETTER IE WITH GRAVE", 0x31, "Cyrillic"),
    c(0x0401, None, "CYRILLIC CAPITAL LETTER IO", 0x31, "Cyrillic"),
    c(0x0402, None, "CYRILLIC CAPITAL LETTER DJE", 0x31, "Cyrillic"),
    c(0x0403, None, "CYRILLIC CAPITAL LETTER GJE", 0x31, "Cyrillic"),
    c(0x0404, None, "CYRILLIC CAPITAL LETTER UKRAINIAN IE", 0x31, "Cyrillic"),
    c(0x0405, None, "CYRILLIC CAPITAL LETTER DZE", 0x31, "Cyrillic"),
    c(0x0406, None, "CYRILLIC CAPITAL LETTER BYELORUSSIAN-UKRAINIAN I", 0x31, "Cyrillic"),
    c(0x0407, None, "CYRILLIC CAPITAL LETTER YI", 0x31, "Cyrillic"),
    c(0x0408, None, "CYRILLIC CAPITAL LETTER JE", 0x31, "Cyrillic"),
    c(0x0409, None, "CYRILLIC CAPITAL LETTER LJE", 0x31, "Cyrillic"),
    c(0x040A, None, "CYRILLIC CAPITAL LETTER NJE", 0x31, "Cyrillic"),
    c(0x040B, None, "CYRILLIC CAPITAL LETTER TSHE", 0x31, "Cyrillic"),
    c(0x040C, None, "CYRILLIC CAPITAL LETTER KJE", 0x31, "Cyrillic"),
    c(0x040D, None, "CYRILLIC CAPITAL LETTER I WITH GRAVE", 0x31, "Cyrillic"),
    c(0x040E, None, "CYRILLIC CAPITAL LETTER SHORT U", 0x31, "Cyrillic"),
    c(0x040F, None, "CYRILLIC CAPITAL LETTER DZHE", 0x31, "Cyrillic"),
    c(0x0410, None, "CYRILLIC CAPITAL LETTER A", 0x31, "Cyrillic"),
    c(0x0411, None, "CYRILLIC CAPITAL LETTER BE", 0x31, "Cyrillic"),
    c(0x0412, None, "CYRILLIC CAPITAL LETTER VE", 0x31, "Cyrillic"),
    c(0x0413, None, "CYRILLIC CAPITAL LETTER GHE", 0x31, "Cyrillic"),
    c(0x0414, None, "CYRILLIC CAPITAL LETTER DE", 0x31, "Cyrillic"),
    c(0x0415, None, "CYRILLIC CAPITAL LETTER IE", 0x31, "Cyrillic"),
    c(0x0416, None, "CYRILLIC CAPITAL LETTER ZHE", 0x31, "Cyrillic"),
    c(0x0417, None, "CYRILLIC CAPITAL LETTER ZE", 0x31, "Cyrillic"),
    c(0x0418, None, "CYRILLIC CAPITAL LETTER I", 0x31, "Cyrillic"),
    c(0x0419, None, "CYRILLIC CAPITAL LETTER SHORT I", 0x31, "Cyrillic"),
    c(0x041A, None, "CYRILLIC CAPITAL LETTER KA", 0x31, "Cyrillic"),
    c(0x041B, None, "CYRILLIC CAPITAL LETTER EL", 0x31, "Cyrillic"),
    c(0x041C, None, "CYRILLIC CAPITAL LETTER EM", 0x31, "Cyrillic"),
    c(0x041D, None, "CYRILLIC CAPITAL LETTER EN", 0x31, "Cyrillic"),
    c(0x041E, None, "CYRILLIC CAPITAL LETTER O", 0x31, "Cyrillic"),
    c(0x041F, None, "CYRILLIC CAPITAL LETTER PE", 0x31, "Cyrillic"),
    c(0x0420, None, "CYRILLIC CAPITAL LETTER ER", 0x31, "Cyrillic"),
    c(0x0421, None, "CYRILLIC CAPITAL LETTER ES", 0x31, "Cyrillic"),
    c(0x0422, None, "CYRILLIC CAPITAL LETTER TE", 0x31, "Cyrillic"),
    c(0x0423, None, "CYRILLIC CAPITAL LETTER U", 0x31, "Cyrillic"),
    c(0x0424, None, "CYRILLIC CAPITAL LETTER EF", 0x31, "Cyrillic"),
    c(0x0425, None, "CYRILLIC CAPITAL LETTER HA", 0x31, "Cyrillic"),
    c(0x0426, None, "CYRILLIC CAPITAL LETTER TSE", 0x31, "Cyrillic"),
    c(0x0427, None, "CYRILLIC CAPITAL LETTER CHE", 0x31, "Cyrillic"),
    c(0x0428, None, "CYRILLIC CAPITAL LETTER SHA", 0x31, "Cyrillic"),
    c(0x0429, None, "CYRILLIC CAPITAL LETTER SHCHA", 0x31, "Cyrillic"),
    c(0x042A, None, "CYRILLIC CAPITAL LETTER HARD SIGN", 0x31, "Cyrillic"),
    c(0x042B, None, "CYRILLIC CAPITAL LETTER YERU", 0x31, "Cyrillic"),
    c(0x042C, None, "CYRILLIC CAPITAL LETTER SOFT SIGN", 0x31, "Cyrillic"),
    c(0x042D, None, "CYRILLIC CAPITAL LETTER E", 0x31, "Cyrillic"),
    c(0x042E, None, "CYRILLIC CAPITAL LETTER YU", 0x31, "Cyrillic"),
    c(0x042F, None, "CYRILLIC CAPITAL LETTER YA", 0x31, "Cyrillic"),
    c(0x0430, None, "CYRILLIC SMALL LETTER A", 0x31, "Cyrillic"),
    c(0x0431, None, "CYRILLIC SMALL LETTER BE", 0x31, "Cyrillic"),
    c(0x0432, None, "CYRILLIC SMALL LETTER VE", 0x31, "Cyrillic"),
    c(0x0433, None, "CYRILLIC SMALL LETTER GHE", 0x31, "Cyrillic"),
    c(0x0434, None, "CYRILLIC SMALL LETTER DE", 0x31, "Cyrillic"),
    c(0x0435, None, "CYRILLIC SMALL LETTER IE", 0x31, "Cyrillic"),
    c(0x0436, None, "CYRILLIC SMALL LETTER ZHE", 0x31, "Cyrillic"),
    c(0x0437, None, "CYRILLIC SMALL LETTER ZE", 0x31, "Cyrillic"),
    c(0x0438, None, "CYRILLIC SMALL LETTER I", 0x31, "Cyrillic"),
    c(0x0439, None, "CYRILLIC SMALL LETTER SHORT I", 0x31, "Cyrillic"),
    c(0x043A, None, "CYRILLIC SMALL LETTER KA", 0x31, "Cyrillic"),
    c(0x043B, None, "CYRILLIC SMALL LETTER EL", 0x31, "Cyrillic"),
    c(0x043C, None, "CYRILLIC SMALL LETTER EM", 0x31, "Cyrillic"),
    c(0x043D, None, "CYRILLIC SMALL LETTER EN", 0x31, "Cyrillic"),
    c(0x043E, None, "CYRILLIC SMALL LETTER O", 0x31, "Cyrillic"),
    c(0x043F, None, "CYRILLIC SMALL LETTER PE", 0x31, "Cyrillic"),
    c(0x0440, None, "CYRILLIC SMALL LETTER ER", 0x31, "Cyrillic"),
    c(0x0441, None, "CYRILLIC SMALL LETTER ES", 0x31, "Cyrillic"),
    c(0x0442, None, "CYRILLIC SMALL LETTER TE", 0x31, "Cyrillic"),
    c(0x0443, None, "CYRILLIC SMALL LETTER U", 0x31, "Cyrillic"),
    c(0x0444, None, "CYRILLIC SMALL LETTER EF", 0x31, "Cyrillic"),
    c(0x0445, None, "CYRILLIC SMALL LETTER HA", 0x31, "Cyrillic"),
    c(0x0446, None, "CYRILLIC SMALL LETTER TSE", 0x31, "Cyrillic"),
    c(0x0447, None, "CYRILLIC SMALL LETTER CHE", 0x31, "Cyrillic"),
    c(0x0448, None, "CYRILLIC SMALL LETTER SHA", 0x31, "Cyrillic"),
    c(0x0449, None, "CYRILLIC SMALL LETTER SHCHA", 0x31, "Cyrillic"),
    c(0x044A, None, "CYRILLIC SMALL LETTER HARD SIGN", 0x31, "Cyrillic"),
    c(0x044B, None, "CYRILLIC SMALL LETTER YERU", 0x31, "Cyrillic"),
    c(0x044C, None, "CYRILLIC SMALL LETTER SOFT SIGN", 0x31, "Cyrillic"),
    c(0x044D, None, "CYRILLIC SMALL LETTER E", 0x31, "Cyrillic"),
    c(0x044E, None, "CYRILLIC SMALL LETTER YU", 0x31, "Cyrillic"),
    c(0x044F, None, "CYRILLIC SMALL LETTER YA", 0x31, "Cyrillic"),
    c(0x0450, None, "CYRILLIC SMALL LETTER IE WITH GRAVE", 0x31, "Cyrillic"),
    c(0x0451, None, "CYRILLIC SMALL LETTER IO", 0x31, "Cyrillic"),
    c(0x0452, None, "CYRILLIC SMALL LETTER DJE", 0x31, "Cyrillic"),
    c(0x0453, None, "CYRILLIC SMALL LETTER GJE", 0x31, "Cyrillic"),
    c(0x0454, None, "CYRILLIC SMALL LETTER UKRAINIAN IE", 0x31, "Cyrillic"),
    c(0x0455, None, "CYRILLIC SMALL LETTER DZE", 0x31, "Cyrillic"),
    c(0x0456, None, "CYRILLIC SMALL LETTER BYELORUSSIAN-UKRAINIAN I", 0x31, "Cyrillic"),
    c(0x0457, None, "CYRILLIC SMALL LETTER YI", 0x31, "Cyrillic"),
    c(0x0458, None, "CYRILLIC SMALL LETTER JE", 0x31, "Cyrillic"),
    c(0x0459, None, "CYRILLIC SMALL LETTER LJE", 0x31, "Cyrillic"),
    c(0x045A, None, "CYRILLIC SMALL LETTER NJE", 0x31, "Cyrillic"),
    c(0x045B, None, "CYRILLIC SMALL LETTER TSHE", 0x31, "Cyrillic"),
    c(0x045C, None, "CYRILLIC SMALL LETTER KJE", 0x31, "Cyrillic"),
    c(0x045D, None, "CYRILLIC SMALL LETTER I WITH GRAVE", 0x31, "Cyrillic"),
    c(0x045E, None, "CYRILLIC SMALL LETTER SHORT U", 0x31, "Cyrillic"),
    c(0x045F, None, "CYRILLIC SMALL LETTER DZHE", 0x31, "Cyrillic"),
    c(0x0460, None, "CYRILLIC CAPITAL LETTER OMEGA", 0x31, "Cyrillic"),
    c(0x0461, None, "CYRILLIC SMALL LETTER OMEGA", 0x31, "Cyrillic"),
    c(0x0462, None, "CYRILLIC CAPITAL LETTER YAT", 0x31, "Cyrillic"),
    c(0x0463, None, "CYRILLIC SMALL LETTER YAT", 0x31, "Cyrillic"),
    c(0x0464, None, "CYRILLIC CAPITAL LETTER IOTIFIED E", 0x31, "Cyrillic"),
    c(0x0465, None, "CYRILLIC SMALL LETTER IOTIFIED E", 0x31, "Cyrillic"),
    c(0x0466, None, "CYRILLIC CAPITAL LETTER LITTLE YUS", 0x31, "Cyrillic"),
    c(0x0467, None, "CYRILLIC SMALL LETTER LITTLE YUS", 0x31, "Cyrillic"),
    c(0x0468, None, "CYRILLIC CAPITAL LETTER IOTIFIED LITTLE YUS", 0x31, "Cyrillic"),
    c(0x0469, None, "CYRILLIC SMALL LETTER IOTIFIED LITTLE YUS", 0x31, "Cyrillic"),
    c(0x046A, None, "CYRILLIC CAPITAL LETTER BIG YUS", 0x31, "Cyrillic"),
    c(0x046B, None, "CYRILLIC SMALL LETTER BIG YUS", 0x31, "Cyrillic"),
    c(0x046C, None, "CYRILLIC CAPITAL LETTER IOTIFIED BIG YUS", 0x31, "Cyrillic"),
    c(0x046D, None, "CYRILLIC SMALL LETTER IOTIFIED BIG YUS", 0x31, "Cyrillic"),
    c(0x046E, None, "CYRILLIC CAPITAL LETTER KSI", 0x31, "Cyrillic"),
    c(0x046F, None, "CYRILLIC SMALL LETTER KSI", 0x31, "Cyrillic"),
    c(0x0470, None, "CYRILLIC CAPITAL LETTER PSI", 0x31, "Cyrillic"),
    c(0x0471, None, "CYRILLIC SMALL LETTER PSI", 0x31, "Cyrillic"),
    c(0x0472, None, "CYRILLIC CAPITAL LETTER FITA", 0x31, "Cyrillic"),
    c(0x0473, None, "CYRILLIC SMALL LETTER FITA", 0x31, "Cyrillic"),
    c(0x0474, None, "CYRILLIC CAPITAL LETTER IZHITSA", 0x31, "Cyrillic"),
    c(0x0475, None, "CYRILLIC SMALL LETTER IZHITSA", 0x31, "Cyrillic"),
    c(0x0476, None, "CYRILLIC CAPITAL LETTER IZHITSA WITH DOUBLE GRAVE ACCENT", 0x31, "Cyrillic"),
    c(0x0477, None, "CYRILLIC SMALL LETTER IZHITSA WITH DOUBLE GRAVE ACCENT", 0x31, "Cyrillic"),
    c(0x0478, None, "CYRILLIC CAPITAL LETTER UK", 0x31, "Cyrillic"),
    c(0x0479, None, "CYRILLIC SMALL LETTER UK", 0x31, "Cyrillic"),
    c(0x047A, None, "CYRILLIC CAPITAL LETTER ROUND OMEGA", 0x31, "Cyrillic"),
    c(0x047B, None, "CYRILLIC SMALL LETTER ROUND OMEGA", 0x31, "Cyrillic"),
    c(0x047C, None, "CYRILLIC CAPITAL LETTER OMEGA WITH TITLO", 0x31, "Cyrillic"),
    c(0x047D, None, "CYRILLIC SMALL LETTER OMEGA WITH TITLO", 0x31, "Cyrillic"),
    c(0x047E, None, "CYRILLIC CAPITAL LETTER OT", 0x31, "Cyrillic"),
    c(0x047F, None, "CYRILLIC SMALL LETTER OT", 0x31, "Cyrillic"),
    c(0x0480, None, "CYRILLIC CAPITAL LETTER KOPPA", 0x31, "Cyrillic"),
    c(0x0481, None, "CYRILLIC SMALL LETTER KOPPA", 0x31, "Cyrillic"),
    c(0x0482, None, "CYRILLIC THOUSANDS SIGN", 0x00, "Cyrillic"),
    c(0x0483, None, "COMBINING CYRILLIC TITLO", 0x20, "Cyrillic"),
    c(0x0484, None, "COMBINING CYRILLIC PALATALIZATION", 0x20, "Cyrillic"),
    c(0x0485, None, "COMBINING CYRILLIC DASIA PNEUMATA", 0x20, "Cyrillic"),
    c(0x0486, None, "COMBINING CYRILLIC PSILI PNEUMATA", 0x20, "Cyrillic"),
    c(0x0487, None, "COMBINING CYRILLIC POKRYTIE", 0x20, "Cyrillic"),
    c(0x0488, None, "COMBINING CYRILLIC HUNDRED THOUSANDS SIGN", 0x00, "Cyrillic"),
    c(0x0489, None, "COMBINING CYRILLIC MILLIONS SIGN", 0x00, "Cyrillic"),
    c(0x048A, None, "CYRILLIC CAPITAL LETTER SHORT I WITH TAIL", 0x31, "Cyrillic"),
    c(0x048B, None, "CYRILLIC SMALL LETTER SHORT I WITH TAIL", 0x31, "Cyrillic"),
    c(0x048C, None, "CYRILLIC CAPITAL LETTER SEMISOFT SIGN", 0x31, "Cyrillic"),
    c(0x048D, None, "CYRILLIC SMALL LETTER SEMISOFT SIGN", 0x31, "Cyrillic"),
    c(0x048E, None, "CYRILLIC CAPITAL LETTER ER WITH TICK", 0x31, "Cyrillic"),
    c(0x048F, None, "CYRILLIC SMALL LETTER ER WITH TICK", 0x31, "Cyrillic"),
    c(0x0490, None, "CYRILLIC CAPITAL LETTER GHE WITH UPTURN", 0x31, "Cyrillic"),
    c(0x0491, None, "CYRILLIC SMALL LETTER GHE WITH UPTURN", 0x31, "Cyrillic"),
    c(0x0492, None, "CYRILLIC CAPITAL LETTER GHE WITH STROKE", 0x31, "Cyrillic"),
    c(0x0493, None, "CYRILLIC SMALL LETTER GHE WITH STROKE", 0x31, "Cyrillic"),
    c(0x0494, None, "CYRILLIC CAPITAL LETTER GHE WITH MIDDLE HOOK", 0x31, "Cyrillic"),
    c(0x0495, None, "CYRILLIC SMALL LETTER GHE WITH MIDDLE HOOK", 0x31, "Cyrillic"),
    c(0x0496, None, "CYRILLIC CAPITAL LETTER ZHE WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x0497, None, "CYRILLIC SMALL LETTER ZHE WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x0498, None, "CYRILLIC CAPITAL LETTER ZE WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x0499, None, "CYRILLIC SMALL LETTER ZE WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x049A, None, "CYRILLIC CAPITAL LETTER KA WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x049B, None, "CYRILLIC SMALL LETTER KA WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x049C, None, "CYRILLIC CAPITAL LETTER KA WITH VERTICAL STROKE", 0x31, "Cyrillic"),
    c(0x049D, None, "CYRILLIC SMALL LETTER KA WITH VERTICAL STROKE", 0x31, "Cyrillic"),
    c(0x049E, None, "CYRILLIC CAPITAL LETTER KA WITH STROKE", 0x31, "Cyrillic"),
    c(0x049F, None, "CYRILLIC SMALL LETTER KA WITH STROKE", 0x31, "Cyrillic"),
    c(0x04A0, None, "CYRILLIC CAPITAL LETTER BASHKIR KA", 0x31, "Cyrillic"),
    c(0x04A1, None, "CYRILLIC SMALL LETTER BASHKIR KA", 0x31, "Cyrillic"),
    c(0x04A2, None, "CYRILLIC CAPITAL LETTER EN WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x04A3, None, "CYRILLIC SMALL LETTER EN WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x04A4, None, "CYRILLIC CAPITAL LIGATURE EN GHE", 0x31, "Cyrillic"),
    c(0x04A5, None, "CYRILLIC SMALL LIGATURE EN GHE", 0x31, "Cyrillic"),
    c(0x04A6, None, "CYRILLIC CAPITAL LETTER PE WITH MIDDLE HOOK", 0x31, "Cyrillic"),
    c(0x04A7, None, "CYRILLIC SMALL LETTER PE WITH MIDDLE HOOK", 0x31, "Cyrillic"),
    c(0x04A8, None, "CYRILLIC CAPITAL LETTER ABKHASIAN HA", 0x31, "Cyrillic"),
    c(0x04A9, None, "CYRILLIC SMALL LETTER ABKHASIAN HA", 0x31, "Cyrillic"),
    c(0x04AA, None, "CYRILLIC CAPITAL LETTER ES WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x04AB, None, "CYRILLIC SMALL LETTER ES WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x04AC, None, "CYRILLIC CAPITAL LETTER TE WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x04AD, None, "CYRILLIC SMALL LETTER TE WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x04AE, None, "CYRILLIC CAPITAL LETTER STRAIGHT U", 0x31, "Cyrillic"),
    c(0x04AF, None, "CYRILLIC SMALL LETTER STRAIGHT U", 0x31, "Cyrillic"),
    c(0x04B0, None, "CYRILLIC CAPITAL LETTER STRAIGHT U WITH STROKE", 0x31, "Cyrillic"),
    c(0x04B1, None, "CYRILLIC SMALL LETTER STRAIGHT U WITH STROKE", 0x31, "Cyrillic"),
    c(0x04B2, None, "CYRILLIC CAPITAL LETTER HA WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x04B3, None, "CYRILLIC SMALL LETTER HA WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x04B4, None, "CYRILLIC CAPITAL LIGATURE TE TSE", 0x31, "Cyrillic"),
    c(0x04B5, None, "CYRILLIC SMALL LIGATURE TE TSE", 0x31, "Cyrillic"),
    c(0x04B6, None, "CYRILLIC CAPITAL LETTER CHE WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x04B7, None, "CYRILLIC SMALL LETTER CHE WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x04B8, None, "CYRILLIC CAPITAL LETTER CHE WITH VERTICAL STROKE", 0x31, "Cyrillic"),
    c(0x04B9, None, "CYRILLIC SMALL LETTER CHE WITH VERTICAL STROKE", 0x31, "Cyrillic"),
    c(0x04BA, None, "CYRILLIC CAPITAL LETTER SHHA", 0x31, "Cyrillic"),
    c(0x04BB, None, "CYRILLIC SMALL LETTER SHHA", 0x31, "Cyrillic"),
    c(0x04BC, None, "CYRILLIC CAPITAL LETTER ABKHASIAN CHE", 0x31, "Cyrillic"),
    c(0x04BD, None, "CYRILLIC SMALL LETTER ABKHASIAN CHE", 0x31, "Cyrillic"),
    c(0x04BE, None, "CYRILLIC CAPITAL LETTER ABKHASIAN CHE WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x04BF, None, "CYRILLIC SMALL LETTER ABKHASIAN CHE WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x04C0, None, "CYRILLIC LETTER PALOCHKA", 0x31, "Cyrillic"),
    c(0x04C1, None, "CYRILLIC CAPITAL LETTER ZHE WITH BREVE", 0x31, "Cyrillic"),
    c(0x04C2, None, "CYRILLIC SMALL LETTER ZHE WITH BREVE", 0x31, "Cyrillic"),
    c(0x04C3, None, "CYRILLIC CAPITAL LETTER KA WITH HOOK", 0x31, "Cyrillic"),
    c(0x04C4, None, "CYRILLIC SMALL LETTER KA WITH HOOK", 0x31, "Cyrillic"),
    c(0x04C5, None, "CYRILLIC CAPITAL LETTER EL WITH TAIL", 0x31, "Cyrillic"),
    c(0x04C6, None, "CYRILLIC SMALL LETTER EL WITH TAIL", 0x31, "Cyrillic"),
    c(0x04C7, None, "CYRILLIC CAPITAL LETTER EN WITH HOOK", 0x31, "Cyrillic"),
    c(0x04C8, None, "CYRILLIC SMALL LETTER EN WITH HOOK", 0x31, "Cyrillic"),
    c(0x04C9, None, "CYRILLIC CAPITAL LETTER EN WITH TAIL", 0x31, "Cyrillic"),
    c(0x04CA, None, "CYRILLIC SMALL LETTER EN WITH TAIL", 0x31, "Cyrillic"),
    c(0x04CB, None, "CYRILLIC CAPITAL LETTER KHAKASSIAN CHE", 0x31, "Cyrillic"),
    c(0x04CC, None, "CYRILLIC SMALL LETTER KHAKASSIAN CHE", 0x31, "Cyrillic"),
    c(0x04CD, None, "CYRILLIC CAPITAL LETTER EM WITH TAIL", 0x31, "Cyrillic"),
    c(0x04CE, None, "CYRILLIC SMALL LETTER EM WITH TAIL", 0x31, "Cyrillic"),
    c(0x04CF, None, "CYRILLIC SMALL LETTER PALOCHKA", 0x31, "Cyrillic"),
    c(0x04D0, None, "CYRILLIC CAPITAL LETTER A WITH BREVE", 0x31, "Cyrillic"),
    c(0x04D1, None, "CYRILLIC SMALL LETTER A WITH BREVE", 0x31, "Cyrillic"),
    c(0x04D2, None, "CYRILLIC CAPITAL LETTER A WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04D3, None, "CYRILLIC SMALL LETTER A WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04D4, None, "CYRILLIC CAPITAL LIGATURE A IE", 0x31, "Cyrillic"),
    c(0x04D5, None, "CYRILLIC SMALL LIGATURE A IE", 0x31, "Cyrillic"),
    c(0x04D6, None, "CYRILLIC CAPITAL LETTER IE WITH BREVE", 0x31, "Cyrillic"),
    c(0x04D7, None, "CYRILLIC SMALL LETTER IE WITH BREVE", 0x31, "Cyrillic"),
    c(0x04D8, None, "CYRILLIC CAPITAL LETTER SCHWA", 0x31, "Cyrillic"),
    c(0x04D9, None, "CYRILLIC SMALL LETTER SCHWA", 0x31, "Cyrillic"),
    c(0x04DA, None, "CYRILLIC CAPITAL LETTER SCHWA WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04DB, None, "CYRILLIC SMALL LETTER SCHWA WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04DC, None, "CYRILLIC CAPITAL LETTER ZHE WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04DD, None, "CYRILLIC SMALL LETTER ZHE WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04DE, None, "CYRILLIC CAPITAL LETTER ZE WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04DF, None, "CYRILLIC SMALL LETTER ZE WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04E0, None, "CYRILLIC CAPITAL LETTER ABKHASIAN DZE", 0x31, "Cyrillic"),
    c(0x04E1, None, "CYRILLIC SMALL LETTER ABKHASIAN DZE", 0x31, "Cyrillic"),
    c(0x04E2, None, "CYRILLIC CAPITAL LETTER I WITH MACRON", 0x31, "Cyrillic"),
    c(0x04E3, None, "CYRILLIC SMALL LETTER I WITH MACRON", 0x31, "Cyrillic"),
    c(0x04E4, None, "CYRILLIC CAPITAL LETTER I WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04E5, None, "CYRILLIC SMALL LETTER I WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04E6, None, "CYRILLIC CAPITAL LETTER O WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04E7, None, "CYRILLIC SMALL LETTER O WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04E8, None, "CYRILLIC CAPITAL LETTER BARRED O", 0x31, "Cyrillic"),
    c(0x04E9, None, "CYRILLIC SMALL LETTER BARRED O", 0x31, "Cyrillic"),
    c(0x04EA, None, "CYRILLIC CAPITAL LETTER BARRED O WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04EB, None, "CYRILLIC SMALL LETTER BARRED O WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04EC, None, "CYRILLIC CAPITAL LETTER E WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04ED, None, "CYRILLIC SMALL LETTER E WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04EE, None, "CYRILLIC CAPITAL LETTER U WITH MACRON", 0x31, "Cyrillic"),
    c(0x04EF, None, "CYRILLIC SMALL LETTER U WITH MACRON", 0x31, "Cyrillic"),
    c(0x04F0, None, "CYRILLIC CAPITAL LETTER U WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04F1, None, "CYRILLIC SMALL LETTER U WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04F2, None, "CYRILLIC CAPITAL LETTER U WITH DOUBLE ACUTE", 0x31, "Cyrillic"),
    c(0x04F3, None, "CYRILLIC SMALL LETTER U WITH DOUBLE ACUTE", 0x31, "Cyrillic"),
    c(0x04F4, None, "CYRILLIC CAPITAL LETTER CHE WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04F5, None, "CYRILLIC SMALL LETTER CHE WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04F6, None, "CYRILLIC CAPITAL LETTER GHE WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x04F7, None, "CYRILLIC SMALL LETTER GHE WITH DESCENDER", 0x31, "Cyrillic"),
    c(0x04F8, None, "CYRILLIC CAPITAL LETTER YERU WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04F9, None, "CYRILLIC SMALL LETTER YERU WITH DIAERESIS", 0x31, "Cyrillic"),
    c(0x04FA, None, "CYRILLIC CAPITAL LETTER GHE WITH STROKE AND HOOK", 0x31, "Cyrillic"),
    c(0x04FB, None, "CYRILLIC SMALL LETTER GHE WITH STROKE AND HOOK", 0x31, "Cyrillic"),
    c(0x04FC, None, "CYRILLIC CAPITAL LETTER HA WITH HOOK", 0x31, "Cyrillic"),
    c(0x04FD, None, "CYRILLIC SMALL LETTER HA WITH HOOK", 0x31, "Cyrillic"),
    c(0x04FE, None, "CYRILLIC CAPITAL LETTER HA WITH STROKE", 0x31, "Cyrillic"),
    c(0x04FF, None, "CYRILLIC SMALL LETTER HA WITH STROKE", 0x31, "Cyrillic"),
    c(0x0500, None, "CYRILLIC CAPITAL LETTER KOMI DE", 0x31, "Cyrillic_Sup"),
    c(0x0501, None, "CYRILLIC SMALL LETTER KOMI DE", 0x31, "Cyrillic_Sup"),
    c(0x0502, None, "CYRILLIC CAPITAL LETTER KOMI DJE", 0x31, "Cyrillic_Sup"),
    c(0x0503, None, "CYRILLIC SMALL LETTER KOMI DJE", 0x31, "Cyrillic_Sup"),
    c(0x0504, None, "CYRILLIC CAPITAL LETTER KOMI ZJE", 0x31, "Cyrillic_Sup"),
    c(0x0505, None, "CYRILLIC SMALL LETTER KOMI ZJE", 0x31, "Cyrillic_Sup"),
    c(0x0506, None, "CYRILLIC CAPITAL LETTER KOMI DZJE", 0x31, "Cyrillic_Sup"),
    c(0x0507, None, "CYRILLIC SMALL LETTER KOMI DZJE", 0x31, "Cyrillic_Sup"),
    c(0x0508, None, "CYRILLIC CAPITAL LETTER KOMI LJE", 0x31, "Cyrillic_Sup"),
    c(0x0509, None, "CYRILLIC SMALL LETTER KOMI LJE", 0x31, "Cyrillic_Sup"),
    c(0x050A, None, "CYRILLIC CAPITAL LETTER KOMI NJE", 0x31, "Cyrillic_Sup"),
    c(0x050B, None, "CYRILLIC SMALL LETTER KOMI NJE", 0x31, "Cyrillic_Sup"),
    c(0x050C, None, "CYRILLIC CAPITAL LETTER KOMI SJE", 0x31, "Cyrillic_Sup"),
    c(0x050D, None, "CYRILLIC SMALL LETTER KOMI SJE", 0x31, "Cyrillic_Sup"),
    c(0x050E, None, "CYRILLIC CAPITAL LETTER KOMI TJE", 0x31, "Cyrillic_Sup"),
    c(0x050F, None, "CYRILLIC SMALL LETTER KOMI TJE", 0x31, "Cyrillic_Sup"),
    c(0x0510, None, "CYRILLIC CAPITAL LETTER REVERSED ZE", 0x31, "Cyrillic_Sup"),
    c(0x0511, None, "CYRILLIC SMALL LETTER REVERSED ZE", 0x31, "Cyrillic_Sup"),
    c(0x0512, None, "CYRILLIC CAPITAL LETTER EL WITH HOOK", 0x31, "Cyrillic_Sup"),
    c(0x0513, None, "CYRILLIC SMALL LETTER EL WITH HOOK", 0x31, "Cyrillic_Sup"),
    c(0x0514, None, "CYRILLIC CAPITAL LETTER LHA", 0x31, "Cyrillic_Sup"),
    c(0x0515, None, "CYRILLIC SMALL LETTER LHA", 0x31, "Cyrillic_Sup"),
    c(0x0516, None, "CYRILLIC CAPITAL LETTER RHA", 0x31, "Cyrillic_Sup"),
    c(0x0517, None, "CYRILLIC SMALL LETTER RHA", 0x31, "Cyrillic_Sup"),
    c(0x0518, None, "CYRILLIC CAPITAL LETTER YAE", 0x31, "Cyrillic_Sup"),
    c(0x0519, None, "CYRILLIC SMALL LETTER YAE", 0x31, "Cyrillic_Sup"),
    c(0x051A, None, "CYRILLIC CAPITAL LETTER QA", 0x31, "Cyrillic_Sup"),
    c(0x051B, None, "CYRILLIC SMALL LETTER QA", 0x31, "Cyrillic_Sup"),
    c(0x051C, None, "CYRILLIC CAPITAL LETTER WE", 0x31, "Cyrillic_Sup"),
    c(0x051D, None, "CYRILLIC SMALL LETTER WE", 0x31, "Cyrillic_Sup"),
    c(0x051E, None, "CYRILLIC CAPITAL LETTER ALEUT KA", 0x31, "Cyrillic_Sup"),
    c(0x051F, None, "CYRILLIC SMALL LETTER ALEUT KA", 0x31, "Cyrillic_Sup"),
    c(0x0520, None, "CYRILLIC CAPITAL LETTER EL WITH MIDDLE HOOK", 0x31, "Cyrillic_Sup"),
    c(0x0521, None, "CYRILLIC SMALL LETTER EL WITH MIDDLE HOOK", 0x31, "Cyrillic_Sup"),
    c(0x0522, None, "CYRILLIC CAPITAL LETTER EN WITH MIDDLE HOOK", 0x31, "Cyrillic_Sup"),
    c(0x0523, None, "CYRILLIC SMALL LETTER EN WITH MIDDLE HOOK", 0x31, "Cyrillic_Sup"),
    c(0x0524, None, "CYRILLIC CAPITAL LETTER PE WITH DESCENDER", 0x31, "Cyrillic_Sup"),
    c(0x0525, None, "CYRILLIC SMALL LETTER PE WITH DESCENDER", 0x31, "Cyrillic_Sup"),
    c(0x0526, None, "CYRILLIC CAPITAL LETTER SHHA WITH DESCENDER", 0x31, "Cyrillic_Sup"),
    c(0x0527, None, "CYRILLIC SMALL LETTER SHHA WITH DESCENDER", 0x31, "Cyrillic_Sup"),
    c(0x0528, None, "CYRILLIC CAPITAL LETTER EN WITH LEFT HOOK", 0x31, "Cyrillic_Sup"),
    c(0x0529, None, "CYRILLIC SMALL LETTER EN WITH LEFT HOOK", 0x31, "Cyrillic_Sup"),
    c(0x052A, None, "CYRILLIC CAPITAL LETTER DZZHE", 0x31, "Cyrillic_Sup"),
    c(0x052B, None, "CYRILLIC SMALL LETTER DZZHE", 0x31, "Cyrillic_Sup"),
    c(0x052C, None, "CYRILLIC CAPITAL LETTER DCHE", 0x31, "Cyrillic_Sup"),
    c(0x052D, None, "CYRILLIC SMALL LETTER DCHE", 0x31, "Cyrillic_Sup"),
    c(0x052E, None, "CYRILLIC CAPITAL LETTER EL WITH DESCENDER", 0x31, "Cyrillic_Sup"),
    c(0x052F, None, "CYRILLIC SMALL LETTER EL WITH DESCENDER", 0x31, "Cyrillic_Sup"),
    c(0x0531, None, "ARMENIAN CAPITAL LETTER AYB", 0x31, "Armenian"),
    c(0x0532, None, "ARMENIAN CAPITAL LETTER BEN", 0x31, "Armenian"),
    c(0x0533, None, "ARMENIAN CAPITAL LETTER GIM", 0x31, "Armenian"),
    c(0x0534, None, "ARMENIAN CAPITAL LETTER DA", 0x31, "Armenian"),
    c(0x0535, None, "ARMENIAN CAPITAL LETTER ECH", 0x31, "Armenian"),
    c(0x0536, None, "ARMENIAN CAPITAL LETTER ZA", 0x31, "Armenian"),
    c(0x0537, None, "ARMENIAN CAPITAL LETTER EH", 0x31, "Armenian"),
    c(0x0538, None, "ARMENIAN CAPITAL LETTER ET", 0x31, "Armenian"),
    c(0x0539, None, "ARMENIAN CAPITAL LETTER TO", 0x31, "Armenian"),
    c(0x053A, None, "ARMENIAN CAPITAL LETTER ZHE", 0x31, "Armenian"),
    c(0x053B, None, "ARMENIAN CAPITAL LETTER INI", 0x31, "Armenian"),
    c(0x053C, None, "ARMENIAN CAPITAL LETTER LIWN", 0x31, "Armenian"),
    c(0x053D, None, "ARMENIAN CAPITAL LETTER XEH", 0x31, "Armenian"),
    c(0x053E, None, "ARMENIAN CAPITAL LETTER CA", 0x31, "Armenian"),
    c(0x053F, None, "ARMENIAN CAPITAL LETTER KEN", 0x31, "Armenian"),
    c(0x0540, None, "ARMENIAN CAPITAL LETTER HO", 0x31, "Armenian"),
    c(0x0541, None, "ARMENIAN CAPITAL LETTER JA", 0x31, "Armenian"),
    c(0x0542, None, "ARMENIAN CAPITAL LETTER GHAD", 0x31, "Armenian"),
    c(0x0543, None, "ARMENIAN CAPITAL LETTER CHEH", 0x31, "Armenian"),
    c(0x0544, None, "ARMENIAN CAPITAL LETTER MEN", 0x31, "Armenian"),
    c(0x0545, None, "ARMENIAN CAPITAL LETTER YI", 0x31, "Armenian"),
    c(0x0546, None, "ARMENIAN CAPITAL LETTER NOW", 0x31, "Armenian"),
    c(0x0547, None, "ARMENIAN CAPITAL LETTER SHA", 0x31, "Armenian"),
    c(0x0548, None, "ARMENIAN CAPITAL LETTER VO", 0x31, "Armenian"),
    c(0x0549, None, "ARMENIAN CAPITAL LETTER CHA", 0x31, "Armenian"),
    c(0x054A, None, "ARMENIAN CAPITAL LETTER PEH", 0x31, "Armenian"),
    c(0x054B, None, "ARMENIAN CAPITAL LETTER JHEH", 0x31, "Armenian"),
    c(0x054C, None, "ARMENIAN CAPITAL LETTER RA", 0x31, "Armenian"),
    c(0x054D, None, "ARMENIAN CAPITAL LETTER SEH", 0x31, "Armenian"),
    c(0x054E, None, "ARMENIAN CAPITAL LETTER VEW", 0x31, "Armenian"),
    c(0x054F, None, "ARMENIAN CAPITAL LETTER TIWN", 0x31, "Armenian"),
    c(0x0550, None, "ARMENIAN CAPITAL LETTER REH", 0x31, "Armenian"),
    c(0x0551, None, "ARMENIAN CAPITAL LETTER CO", 0x31, "Armenian"),
    c(0x0552, None, "ARMENIAN CAPITAL LETTER YIWN", 0x31, "Armenian"),
    c(0x0553, None, "ARMENIAN CAPITAL LETTER PIWR", 0x31, "Armenian"),
    c(0x0554, None, "ARMENIAN CAPITAL LETTER KEH", 0x31, "Armenian"),
    c(0x0555, None, "ARMENIAN CAPITAL LETTER OH", 0x31, "Armenian"),
    c(0x0556, None, "ARMENIAN CAPITAL LETTER FEH", 0x31, "Armenian"),
    c(0x0559, None, "ARMENIAN MODIFIER LETTER LEFT HALF RING", 0x31, "Armenian"),
    c(0x055A, None, "ARMENIAN APOSTROPHE", 0x00, "Armenian"),
    c(0x055B, None, "ARMENIAN EMPHASIS MARK", 0x00, "Armenian"),
    c(0x055C, None, "ARMENIAN EXCLAMATION MARK", 0x00, "Armenian"),
    c(0x055D, None, "ARMENIAN COMMA", 0x00, "Armenian"),
    c(0x055E, None, "ARMENIAN QUESTION MARK", 0x00, "Armenian"),
    c(0x055F, None, "ARMENIAN ABBREVIATION MARK", 0x00, "Armenian"),
    c(0x0560, None, "ARMENIAN SMALL LETTER TURNED AYB", 0x31, "Armenian"),
    c(0x0561, None, "ARMENIAN SMALL LETTER AYB", 0x31, "Armenian"),
    c(0x0562, None, "ARMENIAN SMALL LETTER BEN", 0x31, "Armenian"),
    c(0x0563, None, "ARMENIAN SMALL LETTER GIM", 0x31, "Armenian"),
    c(0x0564, None, "ARMENIAN SMALL LETTER DA", 0x31, "Armenian"),
    c(0x0565, None, "ARMENIAN SMALL LETTER ECH", 0x31, "Armenian"),
    c(0x0566, None, "ARMENIAN SMALL LETTER ZA", 0x31, "Armenian"),
    c(0x0567, None, "ARMENIAN SMALL LETTER EH", 0x31, "Armenian"),
    c(0x0568, None, "ARMENIAN SMALL LETTER ET", 0x31, "Armenian"),
    c(0x0569, None, "ARMENIAN SMALL LETTER TO", 0x31, "Armenian"),
    c(0x056A, None, "ARMENIAN SMALL LETTER ZHE", 0x31, "Armenian"),
    c(0x056B, None, "ARMENIAN SMALL LETTER INI", 0x31, "Armenian"),
    c(0x056C, None, "ARMENIAN SMALL LETTER LIWN", 0x31, "Armenian"),
    c(0x056D, None, "ARMENIAN SMALL LETTER XEH", 0x31, "Armenian"),
    c(0x056E, None, "ARMENIAN SMALL LETTER CA", 0x31, "Armenian"),
    c(0x056F, None, "ARMENIAN SMALL LETTER KEN", 0x31, "Armenian"),
    c(0x0570, None, "ARMENIAN SMALL LETTER HO", 0x31, "Armenian"),
    c(0x0571, None, "ARMENIAN SMALL LETTER JA", 0x31, "Armenian"),
    c(0x0572, None, "ARMENIAN SMALL LETTER GHAD", 0x31, "Armenian"),
    c(0x0573, None, "ARMENIAN SMALL LETTER CHEH", 0x31, "Armenian"),
    c(0x0574, None, "ARMENIAN SMALL LETTER MEN", 0x31, "Armenian"),
    c(0x0575, None, "ARMENIAN SMALL LETTER YI", 0x31, "Armenian"),
    c(0x0576, None, "ARMENIAN SMALL LETTER NOW", 0x31, "Armenian"),
    c(0x0577, None, "ARMENIAN SMALL LETTER SHA", 0x31, "Armenian"),
    c(0x0578, None, "ARMENIAN SMALL LETTER VO", 0x31, "Armenian"),
    c(0x0579, None, "ARMENIAN SMALL LETTER CHA", 0x31, "Armenian"),
    c(0x057A, None, "ARMENIAN SMALL LETTER PEH", 0x31, "Armenian"),
    c(0x057B, None, "ARMENIAN SMALL LETTER JHEH", 0x31, "Armenian"),
    c(0x057C, None, "ARMENIAN SMALL LETTER RA", 0x31, "Armenian"),
    c(0x057D, None, "ARMENIAN SMALL LETTER SEH", 0x31, "Armenian"),
    c(0x057E, None, "ARMENIAN SMALL LETTER VEW", 0x31, "Armenian"),
    c(0x057F, None, "ARMENIAN SMALL LETTER TIWN", 0x31, "Armenian"),
    c(0x0580, None, "ARMENIAN SMALL LETTER REH", 0x31, "Armenian"),
    c(0x0581, None, "ARMENIAN SMALL LETTER CO", 0x31, "Armenian"),
    c(0x0582, None, "ARMENIAN SMALL LETTER YIWN", 0x31, "Armenian"),
    c(0x0583, None, "ARMENIAN SMALL LETTER PIWR", 0x31, "Armenian"),
    c(0x0584, None, "ARMENIAN SMALL LETTER KEH", 0x31, "Armenian"),
    c(0x0585, None, "ARMENIAN SMALL LETTER OH", 0x31, "Armenian"),
    c(0x0586, None, "ARMENIAN SMALL LETTER FEH", 0x31, "Armenian"),
    c(0x0587, None, "ARMENIAN SMALL LIGATURE ECH YIWN", 0x31, "Armenian"),
    c(0x0588, None, "ARMENIAN SMALL LETTER YI WITH STROKE", 0x31, "Armenian"),
    c(0x0589, None, "ARMENIAN FULL STOP", 0x00, "Armenian"),
    c(0x058A, None, "ARMENIAN HYPHEN", 0x00, "Armenian"),
    c(0x058D, None, "RIGHT-FACING ARMENIAN ETERNITY SIGN", 0x00, "Armenian"),
    c(0x058E, None, "LEFT-FACING ARMENIAN ETERNITY SIGN", 0x00, "Armenian"),
    c(0x058F, None, "ARMENIAN DRAM SIGN", 0x00, "Armenian"),
    c(0x0591, None, "HEBREW ACCENT ETNAHTA", 0x20, "Hebrew"),
    c(0x0592, None, "HEBREW ACCENT SEGOL", 0x20, "Hebrew"),
    c(0x0593, None, "HEBREW ACCENT SHALSHELET", 0x20, "Hebrew"),
    c(0x0594, None, "HEBREW ACCENT ZAQEF QATAN", 0x20, "Hebrew"),
    c(0x0595, None, "HEBREW ACCENT ZAQEF GADOL", 0x20, "Hebrew"),
    c(0x0596, None, "HEBREW ACCENT TIPEHA", 0x20, "Hebrew"),
    c(0x0597, None, "HEBREW ACCENT REVIA", 0x20, "Hebrew"),
    c(0x0598, None, "HEBREW ACCENT ZARQA", 0x20, "Hebrew"),
    c(0x0599, None, "HEBREW ACCENT PASHTA", 0x20, "Hebrew"),
    c(0x059A, None, "HEBREW ACCENT YETIV", 0x20, "Hebrew"),
    c(0x059B, None, "HEBREW ACCENT TEVIR", 0x20, "Hebrew"),
    c(0x059C, None, "HEBREW ACCENT GERESH", 0x20, "Hebrew"),
    c(0x059D, None, "HEBREW ACCENT GERESH MUQDAM", 0x20, "Hebrew"),
    c(0x059E, None, "HEBREW ACCENT GERSHAYIM", 0x20, "Hebrew"),
    c(0x059F, None, "HEBREW ACCENT QARNEY PARA", 0x20, "Hebrew"),
    c(0x05A0, None, "HEBREW ACCENT TELISHA GEDOLA", 0x20, "Hebrew"),
    c(0x05A1, None, "HEBREW ACCENT PAZER", 0x20, "Hebrew"),
    c(0x05A2, None, "HEBREW ACCENT ATNAH HAFUKH", 0x20, "Hebrew"),
    c(0x05A3, None, "HEBREW ACCENT MUNAH", 0x20, "Hebrew"),
    c(0x05A4, None, "HEBREW ACCENT MAHAPAKH", 0x20, "Hebrew"),
    c(0x05A5, None, "HEBREW ACCENT MERKHA", 0x20, "Hebrew"),
    c(0x05A6, None, "HEBREW ACCENT MERKHA KEFULA", 0x20, "Hebrew"),
    c(0x05A7, None, "HEBREW ACCENT DARGA", 0x20, "Hebrew"),
    c(0x05A8, None, "HEBREW ACCENT QADMA", 0x20, "Hebrew"),
    c(0x05A9, None, "HEBREW ACCENT TELISHA QETANA", 0x20, "Hebrew"),
    c(0x05AA, None, "HEBREW ACCENT YERAH BEN YOMO", 0x20, "Hebrew"),
    c(0x05AB, None, "HEBREW ACCENT OLE", 0x20, "Hebrew"),
    c(0x05AC, None, "HEBREW ACCENT ILUY", 0x20, "Hebrew"),
    c(0x05AD, None, "HEBREW ACCENT DEHI", 0x20, "Hebrew"),
    c(0x05AE, None, "HEBREW ACCENT ZINOR", 0x20, "Hebrew"),
    c(0x05AF, None, "HEBREW MARK MASORA CIRCLE", 0x20, "Hebrew"),
    c(0x05B0, None, "HEBREW POINT SHEVA", 0x21, "Hebrew"),
    c(0x05B1, None, "HEBREW POINT HATAF SEGOL", 0x21, "Hebrew"),
    c(0x05B2, None, "HEBREW POINT HATAF PATAH", 0x21, "Hebrew"),
    c(0x05B3, None, "HEBREW POINT HATAF QAMATS", 0x21, "Hebrew"),
    c(0x05B4, None, "HEBREW POINT HIRIQ", 0x21, "Hebrew"),
    c(0x05B5, None, "HEBREW POINT TSERE", 0x21, "Hebrew"),
    c(0x05B6, None, "HEBREW POINT SEGOL", 0x21, "Hebrew"),
    c(0x05B7, None, "HEBREW POINT PATAH", 0x21, "Hebrew"),
    c(0x05B8, None, "HEBREW POINT QAMATS", 0x21, "Hebrew"),
    c(0x05B9, None, "HEBREW POINT HOLAM", 0x21, "Hebrew"),
    c(0x05BA, None, "HEBREW POINT HOLAM HASER FOR VAV", 0x21, "Hebrew"),
    c(0x05BB, None, "HEBREW POINT QUBUTS", 0x21, "Hebrew"),
    c(0x05BC, None, "HEBREW POINT DAGESH OR MAPIQ", 0x21, "Hebrew"),
    c(0x05BD, None, "HEBREW POINT METEG", 0x21, "Hebrew"),
    c(0x05BE, None, "HEBREW PUNCTUATION MAQAF", 0x00, "Hebrew"),
    c(0x05BF, None, "HEBREW POINT RAFE", 0x21, "Hebrew"),
    c(0x05C0, None, "HEBREW PUNCTUATION PASEQ", 0x00, "Hebrew"),
    c(0x05C1, None, "HEBREW POINT SHIN DOT", 0x21, "Hebrew"),
    c(0x05C2, None, "HEBREW POINT SIN DOT", 0x21, "Hebrew"),
    c(0x05C3, None, "HEBREW PUNCTUATION SOF PASUQ", 0x00, "Hebrew"),
    c(0x05C4, None, "HEBREW MARK UPPER DOT", 0x21, "Hebrew"),
    c(0x05C5, None, "HEBREW MARK LOWER DOT", 0x21, "Hebrew"),
    c(0x05C6, None, "HEBREW PUNCTUATION NUN HAFUKHA", 0x00, "Hebrew"),
    c(0x05C7, None, "HEBREW POINT QAMATS QATAN", 0x21, "Hebrew"),
    c(0x05D0, None, "HEBREW LETTER ALEF", 0x31, "Hebrew"),
    c(0x05D1, None, "HEBREW LETTER BET", 0x31, "Hebrew"),
    c(0x05D2, None, "HEBREW LETTER GIMEL", 0x31, "Hebrew"),
    c(0x05D3, None, "HEBREW LETTER DALET", 0x31, "Hebrew"),
    c(0x05D4, None, "HEBREW LETTER HE", 0x31, "Hebrew"),
    c(0x05D5, None, "HEBREW LETTER VAV", 0x31, "Hebrew"),
    c(0x05D6, None, "HEBREW LETTER ZAYIN", 0x31, "Hebrew"),
    c(0x05D7, None, "HEBREW LETTER HET", 0x31, "Hebrew"),
    c(0x05D8, None, "HEBREW LETTER TET", 0x31, "Hebrew"),
    c(0x05D9, None, "HEBREW LETTER YOD", 0x31, "Hebrew"),
    c(0x05DA, None, "HEBREW LETTER FINAL KAF", 0x31, "Hebrew"),
    c(0x05DB, None, "HEBREW LETTER KAF", 0x31, "Hebrew"),
    c(0x05DC, None, "HEBREW LETTER LAMED", 0x31, "Hebrew"),
    c(0x05DD, None, "HEBREW LETTER FINAL MEM", 0x31, "Hebrew"),
    c(0x05DE, None, "HEBREW LETTER MEM", 0x31, "Hebrew"),
    c(0x05DF, None, "HEBREW LETTER FINAL NUN", 0x31, "Hebrew"),
    c(0x05E0, None, "HEBREW LETTER NUN", 0x31, "Hebrew"),
    c(0x05E1, None, "HEBREW LETTER SAMEKH", 0x31, "Hebrew"),
    c(0x05E2, None, "HEBREW LETTER AYIN", 0x31, "Hebrew"),
    c(0x05E3, None, "HEBREW LETTER FINAL PE", 0x31, "Hebrew"),
    c(0x05E4, None, "HEBREW LETTER PE", 0x31, "Hebrew"),
    c(0x05E5, None, "HEBREW LETTER FINAL TSADI", 0x31, "Hebrew"),
    c(0x05E6, None, "HEBREW LETTER TSADI", 0x31, "Hebrew"),
    c(0x05E7, None, "HEBREW LETTER QOF", 0x31, "Hebrew"),
    c(0x05E8, None, "HEBREW LETTER RESH", 0x31, "Hebrew"),
    c(0x05E9, None, "HEBREW LETTER SHIN", 0x31, "Hebrew"),
    c(0x05EA, None, "HEBREW LETTER TAV", 0x31, "Hebrew"),
    c(0x05EF, None, "HEBREW YOD TRIANGLE", 0x31, "Hebrew"),
    c(0x05F0, None, "HEBREW LIGATURE YIDDISH DOUBLE VAV", 0x31, "Hebrew"),
    c(0x05F1, None, "HEBREW LIGATURE YIDDISH VAV YOD", 0x31, "Hebrew"),
    c(0x05F2, None, "HEBREW LIGATURE YIDDISH DOUBLE YOD", 0x31, "Hebrew"),
    c(0x05F3, None, "HEBREW PUNCTUATION GERESH", 0x00, "Hebrew"),
    c(0x05F4, None, "HEBREW PUNCTUATION GERSHAYIM", 0x00, "Hebrew"),
    c(0x0600, None, "ARABIC NUMBER SIGN", 0x00, "Arabic"),
    c(0x0601, None, "ARABIC SIGN SANAH", 0x00, "Arabic"),
    c(0x0602, None, "ARABIC FOOTNOTE MARKER", 0x00, "Arabic"),
    c(0x0603, None, "ARABIC SIGN SAFHA", 0x00, "Arabic"),
    c(0x0604, None, "ARABIC SIGN SAMVAT", 0x00, "Arabic"),
    c(0x0605, None, "ARABIC NUMBER MARK ABOVE", 0x00, "Arabic"),
    c(0x0606, None, "ARABIC-INDIC CUBE ROOT", 0x02, "Arabic"),
    c(0x0607, None, "ARABIC-INDIC FOURTH ROOT", 0x02, "Arabic"),
    c(0x0608, None, "ARABIC RAY", 0x02, "Arabic"),
    c(0x0609, None, "ARABIC-INDIC PER MILLE SIGN", 0x00, "Arabic"),
    c(0x060A, None, "ARABIC-INDIC PER TEN THOUSAND SIGN", 0x00, "Arabic"),
    c(0x060B, None, "AFGHANI SIGN", 0x00, "Arabic"),
    c(0x060C, None, "ARABIC COMMA", 0x00, "Arabic"),
    c(0x060D, None, "ARABIC DATE SEPARATOR", 0x00, "Arabic"),
    c(0x060E, None, "ARABIC POETIC VERSE SIGN", 0x00, "Arabic"),
    c(0x060F, None, "ARABIC SIGN MISRA", 0x00, "Arabic"),
    c(0x0610, None, "ARABIC SIGN SALLALLAHOU ALAYHE WASSALLAM", 0x21, "Arabic"),
    c(0x0611, None, "ARABIC SIGN ALAYHE ASSALLAM", 0x21, "Arabic"),
    c(0x0612, None, "ARABIC SIGN RAHMATULLAH ALAYHE", 0x21, "Arabic"),
    c(0x0613, None, "ARABIC SIGN RADI ALLAHOU ANHU", 0x21, "Arabic"),
    c(0x0614, None, "ARABIC SIGN TAKHALLUS", 0x21, "Arabic"),
    c(0x0615, None, "ARABIC SMALL HIGH TAH", 0x21, "Arabic"),
    c(0x0616, None, "ARABIC SMALL HIGH LIGATURE ALEF WITH LAM WITH YEH", 0x21, "Arabic"),
    c(0x0617, None, "ARABIC SMALL HIGH ZAIN", 0x21, "Arabic"),
    c(0x0618, None, "ARABIC SMALL FATHA", 0x21, "Arabic"),
    c(0x0619, None, "ARABIC SMALL DAMMA", 0x21, "Arabic"),
    c(0x061A, None, "ARABIC SMALL KASRA", 0x21, "Arabic"),
    c(0x061B, None, "ARABIC SEMICOLON", 0x00, "Arabic"),
    c(0x061C, None, "ARABIC LETTER MARK", 0x00, "Arabic"),
    c(0x061D, None, "ARABIC END OF TEXT MARK", 0x00, "Arabic"),
    c(0x061E, None, "ARABIC TRIPLE DOT PUNCTUATION MARK", 0x00, "Arabic"),
    c(0x061F, None, "ARABIC QUESTION MARK", 0x00, "Arabic"),
    c(0x0620, None, "ARABIC LETTER KASHMIRI YEH", 0x31, "Arabic"),
    c(0x0621, None, "ARABIC LETTER HAMZA", 0x31, "Arabic"),
    c(0x0622, None, "ARABIC LETTER ALEF WITH MADDA ABOVE", 0x31, "Arabic"),
    c(0x0623, None, "ARABIC LETTER ALEF WITH HAMZA ABOVE", 0x31, "Arabic"),
    c(0x0624, None, "ARABIC LETTER WAW WITH HAMZA ABOVE", 0x31, "Arabic"),
    c(0x0625, None, "ARABIC LETTER ALEF WITH HAMZA BELOW", 0x31, "Arabic"),
    c(0x0626, None, "ARABIC LETTER YEH WITH HAMZA ABOVE", 0x31, "Arabic"),
    c(0x0627, None, "ARABIC LETTER ALEF", 0x31, "Arabic"),
    c(0x0628, None, "ARABIC LETTER BEH", 0x31, "Arabic"),
    c(0x0629, None, "ARABIC LETTER TEH MARBUTA", 0x31, "Arabic"),
    c(0x062A, None, "ARABIC LETTER TEH", 0x31, "Arabic"),
    c(0x062B, None, "ARABIC LETTER THEH", 0x31, "Arabic"),
    c(0x062C, None, "ARABIC LETTER JEEM", 0x31, "Arabic"),
    c(0x062D, None, "ARABIC LETTER HAH", 0x31, "Arabic"),
    c(0x062E, None, "ARABIC LETTER KHAH", 0x31, "Arabic"),
    c(0x062F, None, "ARABIC LETTER DAL", 0x31, "Arabic"),
    c(0x0630, None, "ARABIC LETTER THAL", 0x31, "Arabic"),
    c(0x0631, None, "ARABIC LETTER REH", 0x31, "Arabic"),
    c(0x0632, None, "ARABIC LETTER ZAIN", 0x31, "Arabic"),
    c(0x0633, None, "ARABIC LETTER SEEN", 0x31, "Arabic"),
    c(0x0634, None, "ARABIC LETTER SHEEN", 0x31, "Arabic"),
    c(0x0635, None, "ARABIC LETTER SAD", 0x31, "Arabic"),
    c(0x0636, None, "ARABIC LETTER DAD", 0x31, "Arabic"),
    c(0x0637, None, "ARABIC LETTER TAH", 0x31, "Arabic"),
    c(0x0638, None, "ARABIC LETTER ZAH", 0x31, "Arabic"),
    c(0x0639, None, "ARABIC LETTER AIN", 0x31, "Arabic"),
    c(0x063A, None, "ARABIC LETTER GHAIN", 0x31, "Arabic"),
    c(0x063B, None, "ARABIC LETTER KEHEH WITH TWO DOTS ABOVE", 0x31, "Arabic"),
    c(0x063C, None, "ARABIC LETTER KEHEH WITH THREE DOTS BELOW", 0x31, "Arabic"),
    c(0x063D, None, "ARABIC LETTER FARSI YEH WITH INVERTED V", 0x31, "Arabic"),
    c(0x063E, None, "ARABIC LETTER FARSI YEH WITH TWO DOTS ABOVE", 0x31, "Arabic"),
    c(0x063F, None, "ARABIC LETTER FARSI YEH WITH THREE DOTS ABOVE", 0x31, "Arabic"),
    c(0x0640, None, "ARABIC TATWEEL", 0x31, "Arabic"),
    c(0x0641, None, "ARABIC LETTER FEH", 0x31, "Arabic"),
    c(0x0642, None, "ARABIC LETTER QAF", 0x31, "Arabic"),
    c(0x0643, None, "ARABIC LETTER KAF", 0x31, "Arabic"),
    c(0x0644, None, "ARABIC LETTER LAM", 0x31, "Arabic"),
    c(0x0645, None, "ARABIC LETTER MEEM", 0x31, "Arabic"),
    c(0x0646, None, "ARABIC LETTER NOON", 0x31, "Arabic"),
    c(0x0647, None, "ARABIC LETTER HEH", 0x31, "Arabic"),
    c(0x0648, None, "ARABIC LETTER WAW", 0x31, "Arabic"),
    c(0x0649, None, "ARABIC LETTER ALEF MAKSURA", 0x31, "Arabic"),
    c(0x064A, None, "ARABIC LETTER YEH", 0x31, "Arabic"),
    c(0x064B, None, "ARABIC FATHATAN", 0x21, "Arabic"),
    c(0x064C, None, "ARABIC DAMMATAN", 0x21, "Arabic"),
    c(0x064D, None, "ARABIC KASRATAN", 0x21, "Arabic"),
    c(0x064E, None, "ARABIC FATHA", 0x21, "Arabic"),
    c(0x064F, None, "ARABIC DAMMA", 0x21, "Arabic"),
    c(0x0650, None, "ARABIC KASRA", 0x21, "Arabic"),
    c(0x0651, None, "ARABIC SHADDA", 0x21, "Arabic"),
    c(0x0652, None, "ARABIC SUKUN", 0x21, "Arabic"),
    c(0x0653, None, "ARABIC MADDAH ABOVE", 0x21, "Arabic"),
    c(0x0654, None, "ARABIC HAMZA ABOVE", 0x21, "Arabic"),
    c(0x0655, None, "ARABIC HAMZA BELOW", 0x21, "Arabic"),
    c(0x0656, None, "ARABIC SUBSCRIPT ALEF", 0x21, "Arabic"),
    c(0x0657, None, "ARABIC INVERTED DAMMA", 0x21, "Arabic"),
    c(0x0658, None, "ARABIC MARK NOON GHUNNA", 0x20, "Arabic"),
    c(0x0659, None, "ARABIC ZWARAKAY", 0x21, "Arabic"),
    c(0x065A, None, "ARABIC VOWEL SIGN SMALL V ABOVE", 0x21, "Arabic"),
    c(0x065B, None, "ARABIC VOWEL SIGN INVERTED SMALL V ABOVE", 0x21, "Arabic"),
    c(0x065C, None, "ARABIC VOWEL SIGN DOT BELOW", 0x21, "Arabic"),
    c(0x065D, None, "ARABIC REVERSED DAMMA", 0x21, "Arabic"),
    c(0x065E, None, "ARABIC FATHA WITH TWO DOTS", 0x21, "Arabic"),
    c(0x065F, None, "ARABIC WAVY HAMZA BELOW", 0x21, "Arabic"),
    c(0x0660, None, "ARABIC-INDIC DIGIT ZERO", 0x20, "Arabic"),
    c(0x0661, None, "ARABIC-INDIC DIGIT ONE", 0x20, "Arabic"),
    c(0x0662, None, "ARABIC-INDIC DIGIT TWO", 0x20, "Arabic"),
    c(0x0663, None, "ARABIC-INDIC DIGIT THREE", 0x20, "Arabic"),
    c(0x0664, None, "ARABIC-INDIC DIGIT FOUR", 0x20, "Arabic"),
    c(0x0665, None, "ARABIC-INDIC DIGIT FIVE", 0x20, "Arabic"),
    c(0x0666, None, "ARABIC-INDIC DIGIT SIX", 0x20, "Arabic"),
    c(0x0667, None, "ARABIC-INDIC DIGIT SEVEN", 0x20, "Arabic"),
    c(0x0668, None, "ARABIC-INDIC DIGIT EIGHT", 0x20, "Arabic"),
    c(0x0669, None, "ARABIC-INDIC DIGIT NINE", 0x20, "Arabic"),
    c(0x066A, None, "ARABIC PERCENT SIGN", 0x00, "Arabic"),
    c(0x066B, None, "ARABIC DECIMAL SEPARATOR", 0x00, "Arabic"),
    c(0x066C, None, "ARABIC THOUSANDS SEPARATOR", 0x00, "Arabic"),
    c(0x066D, None, "ARABIC FIVE POINTED STAR", 0x00, "Arabic"),
    c(0x066E, None, "ARABIC LETTER DOTLESS BEH", 0x31, "Arabic"),
    c(0x066F, None, "ARABIC LETTER DOTLESS QAF", 0x31, "Arabic"),
    c(0x0670, None, "ARABIC LETTER SUPERSCRIPT ALEF", 0x21, "Arabic"),
    c(0x0671, None, "ARABIC LETTER ALEF WASLA", 0x31, "Arabic"),
    c(0x0672, None, "ARABIC LETTER ALEF WITH WAVY HAMZA ABOVE", 0x31, "Arabic"),
    c(0x0673, None, "ARABIC LETTER ALEF WITH WAVY HAMZA BELOW", 0x39, "Arabic"),
    c(0x0674, None, "ARABIC LETTER HIGH HAMZA", 0x31, "Arabic"),
    c(0x0675, None, "ARABIC LETTER HIGH HAMZA ALEF", 0x31, "Arabic"),
    c(0x0676, None, "ARABIC LETTER HIGH HAMZA WAW", 0x31, "Arabic"),
    c(0x0677, None, "ARABIC LETTER U WITH HAMZA ABOVE", 0x31, "Arabic"),
    c(0x0678, None, "ARABIC LETTER HIGH HAMZA YEH", 0x31, "Arabic"),
    c(0x0679, None, "ARABIC LETTER TTEH", 0x31, "Arabic"),
    c(0x067A, None, "ARABIC LETTER TTEHEH", 0x31, "Arabic"),
    c(0x067B, None, "ARABIC LETTER BEEH", 0x31, "Arabic"),
    c(0x067C, None, "ARABIC LETTER TEH WITH RING", 0x31, "Arabic"),
    c(0x067D, None, "ARABIC LETTER TEH WITH THREE DOTS ABOVE DOWNWARDS", 0x31, "Arabic"),
    c(0x067E, None, "ARABIC LETTER PEH", 0x31, "Arabic"),
    c(0x067F, None, "ARABIC LETTER TEHEH", 0x31, "Arabic"),
    c(0x0680, None, "ARABIC LETTER BEHEH", 0x31, "Arabic"),
    c(0x0681, None, "ARABIC LETTER HAH WITH HAMZA ABOVE", 0x31, "Arabic"),
    c(0x0682, None, "ARABIC LETTER HAH WITH TWO DOTS VERTICAL ABOVE", 0x31, "Arabic"),
    c(0x0683, None, "ARABIC LETTER NYEH", 0x31, "Arabic"),
    c(0x0684, None, "ARABIC LETTER DYEH", 0x31, "Arabic"),
    c(0x0685, None, "ARABIC LETTER HAH WITH THREE DOTS ABOVE", 0x31, "Arabic"),
    c(0x0686, None, "ARABIC LETTER TCHEH", 0x31, "Arabic"),
    c(0x0687, None, "ARABIC LETTER TCHEHEH", 0x31, "Arabic"),
    c(0x0688, None, "ARABIC LETTER DDAL", 0x31, "Arabic"),
    c(0x0689, None, "ARABIC LETTER DAL WITH RING", 0x31, "Arabic"),
    c(0x068A, None, "ARABIC LETTER DAL WITH DOT BELOW", 0x31, "Arabic"),
    c(0x068B, None, "ARABIC LETTER DAL WITH DOT BELOW AND SMALL TAH", 0x31, "Arabic"),
    c(0x068C, None, "ARABIC LETTER DAHAL", 0x31, "Arabic"),
    c(0x068D, None, "ARABIC LETTER DDAHAL", 0x31, "Arabic"),
    c(0x068E, None, "ARABIC LETTER DUL", 0x31, "Arabic"),
    c(0x068F, None, "ARABIC LETTER DAL WITH THREE DOTS ABOVE DOWNWARDS", 0x31, "Arabic"),
    c(0x0690, None, "ARABIC LETTER DAL WITH FOUR DOTS ABOVE", 0x31, "Arabic"),
    c(0x0691, None, "ARABIC LETTER RREH", 0x31, "Arabic"),
    c(0x0692, None, "ARABIC LETTER REH WITH SMALL V", 0x31, "Arabic"),
    c(0x0693, None, "ARABIC LETTER REH WITH RING", 0x31, "Arabic"),
    c(0x0694, None, "ARABIC LETTER REH WITH DOT BELOW", 0x31, "Arabic"),
    c(0x0695, None, "ARABIC LETTER REH WITH SMALL V BELOW", 0x31, "Arabic"),
    c(0x0696, None, "ARABIC LETTER REH WITH DOT BELOW AND DOT ABOVE", 0x31, "Arabic"),
    c(0x0697, None, "ARABIC LETTER REH WITH TWO DOTS ABOVE", 0x31, "Arabic"),
    c(0x0698, None, "ARABIC LETTER JEH", 0x31, "Arabic"),
    c(0x0699, None, "ARABIC LETTER REH WITH FOUR DOTS ABOVE", 0x31, "Arabic"),
    c(0x069A, None, "ARABIC LETTER SEEN WITH DOT BELOW AND DOT ABOVE", 0x31, "Arabic"),
    c(0x069B, None, "ARABIC LETTER SEEN WITH THREE DOTS BELOW", 0x31, "Arabic"),
    c(0x069C, None, "ARABIC LETTER SEEN WITH THREE DOTS BELOW AND THREE DOTS ABOVE", 0x31, "Arabic"),
    c(0x069D, None, "ARABIC LETTER SAD WITH TWO DOTS BELOW", 0x31, "Arabic"),
    c(0x069E, None, "ARABIC LETTER SAD WITH THREE DOTS ABOVE", 0x31, "Arabic"),
    c(0x069F, None, "ARABIC LETTER TAH WITH THREE DOTS ABOVE", 0x31, "Arabic"),
    c(0x06A0, None, "ARABIC LETTER AIN WITH THREE DOTS ABOVE", 0x31, "Arabic"),
    c(0x06A1, None, "ARABIC LETTER DOTLESS FEH", 0x31, "Arabic"),
    c(0x06A2, None, "ARABIC LETTER FEH WITH DOT MOVED BELOW", 0x31, "Arabic"),
    c(0x06A3, None, "ARABIC LETTER FEH WITH DOT BELOW", 0x31, "Arabic"),
    c(0x06A4, None, "ARABIC LETTER VEH", 0x31, "Arabic"),
    c(0x06A5, None, "ARABIC LETTER FEH WITH THREE DOTS BELOW", 0x31, "Arabic"),
    c(0x06A6, None, "ARABIC LETTER PEHEH", 0x31, "Arabic"),
    c(0x06A7, None, "ARABIC LETTER QAF WITH DOT ABOVE", 0x31, "Arabic"),
    c(0x06A8, None, "ARABIC LETTER QAF WITH THREE DOTS ABOVE", 0x31, "Arabic"),
    c(0x06A9, None, "ARABIC LETTER KEHEH", 0x31, "Arabic"),
    c(0x06AA, None, "ARABIC LETTER SWASH KAF", 0x31, "Arabic"),
    c(0x06AB, None, "ARABIC LETTER KAF WITH RING", 0x31, "Arabic"),
    c(0x06AC, None, "ARABIC LETTER KAF WITH DOT ABOVE", 0x31, "Arabic"),
    c(0x06AD, None, "ARABIC LETTER NG", 0x31, "Arabic"),
    c(0x06AE, None, "ARABIC LETTER KAF WITH THREE DOTS BELOW", 0x31, "Arabic"),
    c(0x06AF, None, "ARABIC LETTER GAF", 0x31, "Arabic"),
    c(0x06B0, None, "ARABIC LETTER GAF WITH RING", 0x31, "Arabic"),
    c(0x06B1, None, "ARABIC LETTER NGOEH", 0x31, "Arabic"),
    c(0x06B2, None, "ARABIC LETTER GAF WITH TWO DOTS BELOW", 0x31, "Arabic"),
    c(0x06B3, None, "ARABIC LETTER GUEH", 0x31, "Arabic"),
    c(0x06B4, None, "ARABIC LETTER GAF WITH THREE DOTS ABOVE", 0x31, "Arabic"),
    c(0x06B5, None, "ARABIC LETTER LAM WITH SMALL V", 0x31, "Arabic"),
    c(0x06B6, None, "ARABIC LETTER LAM WITH DOT ABOVE", 0x31, "Arabic"),
    c(0x06B7, None, "ARABIC LETTER LAM WITH THREE DOTS ABOVE", 0x31, "Arabic"),
    c(0x06B8, None, "ARABIC LETTER LAM WITH THREE DOTS BELOW", 0x31, "Arabic"),
    c(0x06B9, None, "ARABIC LETTER NOON WITH DOT BELOW", 0x31, "Arabic"),
    c(0x06BA, None, "ARABIC LETTER NOON GHUNNA", 0x31, "Arabic"),
    c(0x06BB, None, "ARABIC LETTER RNOON", 0x31, "Arabic"),
    c(0x06BC, None, "ARABIC LETTER NOON WITH RING", 0x31, "Arabic"),
    c(0x06BD, None, "ARABIC LETTER NOON WITH THREE DOTS ABOVE", 0x31, "Arabic"),
    c(0x06BE, None, "ARABIC LETTER HEH DOACHASHMEE", 0x31, "Arabic"),
    c(0x06BF, None, "ARABIC LETTER TCHEH WITH DOT ABOVE", 0x31, "Arabic"),
    c(0x06C0, None, "ARABIC LETTER HEH WITH YEH ABOVE", 0x31, "Arabic"),
    c(0x06C1, None, "ARABIC LETTER HEH GOAL", 0x31, "Arabic"),
    c(0x06C2, None, "ARABIC LETTER HEH GOAL WITH HAMZA ABOVE", 0x31, "Arabic"),
    c(0x06C3, None, "ARABIC LETTER TEH MARBUTA GOAL", 0x31, "Arabic"),
    c(0x06C4, None, "ARABIC LETTER WAW WITH RING", 0x31, "Arabic"),
    c(0x06C5, None, "ARABIC LETTER KIRGHIZ OE", 0x31, "Arabic"),
    c(0x06C6, None, "ARABIC LETTER OE", 0x31, "Arabic"),
    c(0x06C7, None, "ARABIC LETTER U", 0x31, "Arabic"),
    c(0x06C8, None, "ARABIC LETTER YU", 0x31, "Arabic"),
    c(0x06C9, None, "ARABIC LETTER KIRGHIZ YU", 0x31, "Arabic"),
    c(0x06CA, None, "ARABIC LETTER WAW WITH TWO DOTS ABOVE", 0x31, "Arabic"),
    c(0x06CB, None, "ARABIC LETTER VE", 0x31, "Arabic"),
    c(0x06CC, None, "ARABIC LETTER FARSI YEH", 0x31, "Arabic"),
    c(0x06CD, None, "ARABIC LETTER YEH WITH TAIL", 0x31, "Arabic"),
    c(0x06CE, None, "ARABIC LETTER YEH WITH SMALL V", 0x31, "Arabic"),
    c(0x06CF, None, "ARABIC LETTER WAW WITH DOT ABOVE", 0x31, "Arabic"),
    c(0x06D0, None, "ARABIC LETTER E", 0x31, "Arabic"),
    c(0x06D1, None, "ARABIC LETTER YEH WITH THREE DOTS BELOW", 0x31, "Arabic"),
    c(0x06D2, None, "ARABIC LETTER YEH BARREE", 0x31, "Arabic"),
    c(0x06D3, None, "ARABIC LETTER YEH BARREE WITH HAMZA ABOVE", 0x31, "Arabic"),
    c(0x06D4, None, "ARABIC FULL STOP", 0x00, "Arabic"),
    c(0x06D5, None, "ARABIC LETTER AE", 0x31, "Arabic"),
    c(0x06D6, None, "ARABIC SMALL HIGH LIGATURE SAD WITH LAM WITH ALEF MAKSURA", 0x21, "Arabic"),
    c(0x06D7, None, "ARABIC SMALL HIGH LIGATURE QAF WITH LAM WITH ALEF MAKSURA", 0x21, "Arabic"),
    c(0x06D8, None, "ARABIC SMALL HIGH MEEM INITIAL FORM", 0x21, "Arabic"),
    c(0x06D9, None, "ARABIC SMALL HIGH LAM ALEF", 0x21, "Arabic"),
    c(0x06DA, None, "ARABIC SMALL HIGH JEEM", 0x21, "Arabic"),
    c(0x06DB, None, "ARABIC SMALL HIGH THREE DOTS", 0x21, "Arabic"),
    c(0x06DC, None, "ARABIC SMALL HIGH SEEN", 0x21, "Arabic"),
    c(0x06DD, None, "ARABIC END OF AYAH", 0x00, "Arabic"),
    c(0x06DE, None, "ARABIC START OF RUB EL HIZB", 0x00, "Arabic"),
    c(0x06DF, None, "ARABIC SMALL HIGH ROUNDED ZERO", 0x20, "Arabic"),
    c(0x06E0, None, "ARABIC SMALL HIGH UPRIGHT RECTANGULAR ZERO", 0x20, "Arabic"),
    c(0x06E1, None, "ARABIC SMALL HIGH DOTLESS HEAD OF KHAH", 0x21, "Arabic"),
    c(0x06E2, None, "ARABIC SMALL HIGH MEEM ISOLATED FORM", 0x21, "Arabic"),
    c(0x06E3, None, "ARABIC SMALL LOW SEEN", 0x21, "Arabic"),
    c(0x06E4, None, "ARABIC SMALL HIGH MADDA", 0x21, "Arabic"),
    c(0x06E5, None, "ARABIC SMALL WAW", 0x31, "Arabic"),
    c(0x06E6, None, "ARABIC SMALL YEH", 0x31, "Arabic"),
    c(0x06E7, None, "ARABIC SMALL HIGH YEH", 0x21, "Arabic"),
    c(0x06E8, None, "ARABIC SMALL HIGH NOON", 0x21, "Arabic"),
    c(0x06E9, None, "ARABIC PLACE OF SAJDAH", 0x00, "Arabic"),
    c(0x06EA, None, "ARABIC EMPTY CENTRE LOW STOP", 0x20, "Arabic"),
    c(0x06EB, None, "ARABIC EMPTY CENTRE HIGH STOP", 0x20, "Arabic"),
    c(0x06EC, None, "ARABIC ROUNDED HIGH STOP WITH FILLED CENTRE", 0x20, "Arabic"),
    c(0x06ED, None, "ARABIC SMALL LOW MEEM", 0x21, "Arabic"),
    c(0x06EE, None, "ARABIC LETTER DAL WITH INVERTED V", 0x31, "Arabic"),
    c(0x06EF, None, "ARABIC LETTER REH WITH INVERTED V", 0x31, "Arabic"),
    c(0x06F0, None, "EXTENDED ARABIC-INDIC DIGIT ZERO", 0x20, "Arabic"),
    c(0x06F1, None, "EXTENDED ARABIC-INDIC DIGIT ONE", 0x20, "Arabic"),
    c(0x06F2, None, "EXTENDED ARABIC-INDIC DIGIT TWO", 0x20, "Arabic"),
    c(0x06F3, None, "EXTENDED ARABIC-INDIC DIGIT THREE", 0x20, "Arabic"),
    c(0x06F4, None, "EXTENDED ARABIC-INDIC DIGIT FOUR", 0x20, "Arabic"),
    c(0x06F5, None, "EXTENDED ARABIC-INDIC DIGIT FIVE", 0x20, "Arabic"),
    c(0x06F6, None, "EXTENDED ARABIC-INDIC DIGIT SIX", 0x20, "Arabic"),
    c(0x06F7, None, "EXTENDED ARABIC-INDIC DIGIT SEVEN", 0x20, "Arabic"),
    c(0x06F8, None, "EXTENDED ARABIC-INDIC DIGIT EIGHT", 0x20, "Arabic"),
    c(0x06F9, None, "EXTENDED ARABIC-INDIC DIGIT NINE", 0x20, "Arabic"),
    c(0x06FA, None, "ARABIC LETTER SHEEN WITH DOT BELOW", 0x31, "Arabic"),
    c(0x06FB, None, "ARABIC LETTER DAD WITH DOT BELOW", 0x31, "Arabic"),
    c(0x06FC, None, "ARABIC LETTER GHAIN WITH DOT BELOW", 0x31, "Arabic"),
    c(0x06FD, None, "ARABIC SIGN SINDHI AMPERSAND", 0x00, "Arabic"),
    c(0x06FE, None, "ARABIC SIGN SINDHI POSTPOSITION MEN", 0x00, "Arabic"),
    c(0x06FF, None, "ARABIC LETTER HEH WITH INVERTED V", 0x31, "Arabic"),
    c(0x0700, None, "SYRIAC END OF PARAGRAPH", 0x00, "Syriac"),
    c(0x0701, None, "SYRIAC SUPRALINEAR FULL STOP", 0x00, "Syriac"),
    c(0x0702, None, "SYRIAC SUBLINEAR FULL STOP", 0x00, "Syriac"),
    c(0x0703, None, "SYRIAC SUPRALINEAR COLON", 0x00, "Syriac"),
    c(0x0704, None, "SYRIAC SUBLINEAR COLON", 0x00, "Syriac"),
    c(0x0705, None, "SYRIAC HORIZONTAL COLON", 0x00, "Syriac"),
    c(0x0706, None, "SYRIAC COLON SKEWED LEFT", 0x00, "Syriac"),
    c(0x0707, None, "SYRIAC COLON SKEWED RIGHT", 0x00, "Syriac"),
    c(0x0708, None, "SYRIAC SUPRALINEAR COLON SKEWED LEFT", 0x00, "Syriac"),
    c(0x0709, None, "SYRIAC SUBLINEAR COLON SKEWED LEFT", 0x00, "Syriac"),
    c(0x070A, None, "SYRIAC CONTRACTION", 0x00, "Syriac"),
    c(0x070B, None, "SYRIAC HARKLEAN OBELUS", 0x00, "Syriac"),
    c(0x070C, None, "SYRIAC HARKLEAN METOBELUS", 0x00, "Syriac"),
    c(0x070D, None, "SYRIAC HARKLEAN ASTERISCUS", 0x00, "Syriac"),
    c(0x070F, None, "SYRIAC ABBREVIATION MARK", 0x00, "Syriac"),
    c(0x0710, None, "SYRIAC LETTER ALAPH", 0x31, "Syriac"),
    c(0x0711, None, "SYRIAC LETTER SUPERSCRIPT ALAPH", 0x21, "Syriac"),
    c(0x0712, None, "SYRIAC LETTER BETH", 0x31, "Syriac"),
    c(0x0713, None, "SYRIAC LETTER GAMAL", 0x31, "Syriac"),
    c(0x0714, None, "SYRIAC LETTER GAMAL GARSHUNI", 0x31, "Syriac"),
    c(0x0715, None, "SYRIAC LETTER DALATH", 0x31, "Syriac"),
    c(0x0716, None, "SYRIAC LETTER DOTLESS DALATH RISH", 0x31, "Syriac"),
    c(0x0717, None, "SYRIAC LETTER HE", 0x31, "Syriac"),
    c(0x0718, None, "SYRIAC LETTER WAW", 0x31, "Syriac"),
    c(0x0719, None, "SYRIAC LETTER ZAIN", 0x31, "Syriac"),
    c(0x071A, None, "SYRIAC LETTER HETH", 0x31, "Syriac"),
    c(0x071B, None, "SYRIAC LETTER TETH", 0x31, "Syriac"),
    c(0x071C, None, "SYRIAC LETTER TETH GARSHUNI", 0x31, "Syriac"),
    c(0x071D, None, "SYRIAC LETTER YUDH", 0x31, "Syriac"),
    c(0x071E, None, "SYRIAC LETTER YUDH HE", 0x31, "Syriac"),
    c(0x071F, None, "SYRIAC LETTER KAPH", 0x31, "Syriac"),
    c(0x0720, None, "SYRIAC LETTER LAMADH", 0x31, "Syriac"),
    c(0x0721, None, "SYRIAC LETTER MIM", 0x31, "Syriac"),
    c(0x0722, None, "SYRIAC LETTER NUN", 0x31, "Syriac"),
    c(0x0723, None, "SYRIAC LETTER SEMKATH", 0x31, "Syriac"),
    c(0x0724, None, "SYRIAC LETTER FINAL SEMKATH", 0x31, "Syriac"),
    c(0x0725, None, "SYRIAC LETTER E", 0x31, "Syriac"),
    c(0x0726, None, "SYRIAC LETTER PE", 0x31, "Syriac"),
    c(0x0727, None, "SYRIAC LETTER REVERSED PE", 0x31, "Syriac"),
    c(0x0728, None, "SYRIAC LETTER SADHE", 0x31, "Syriac"),
    c(0x0729, None, "SYRIAC LETTER QAPH", 0x31, "Syriac"),
    c(0x072A, None, "SYRIAC LETTER RISH", 0x31, "Syriac"),
    c(0x072B, None, "SYRIAC LETTER SHIN", 0x31, "Syriac"),
    c(0x072C, None, "SYRIAC LETTER TAW", 0x31, "Syriac"),
    c(0x072D, None, "SYRIAC LETTER PERSIAN BHETH", 0x31, "Syriac"),
    c(0x072E, None, "SYRIAC LETTER PERSIAN GHAMAL", 0x31, "Syriac"),
    c(0x072F, None, "SYRIAC LETTER PERSIAN DHALATH", 0x31, "Syriac"),
    c(0x0730, None, "SYRIAC PTHAHA ABOVE", 0x21, "Syriac"),
    c(0x0731, None, "SYRIAC PTHAHA BELOW", 0x21, "Syriac"),
    c(0x0732, None, "SYRIAC PTHAHA DOTTED", 0x21, "Syriac"),
    c(0x0733, None, "SYRIAC ZQAPHA ABOVE", 0x21, "Syriac"),
    c(0x0734, None, "SYRIAC ZQAPHA BELOW", 0x21, "Syriac"),
    c(0x0735, None, "SYRIAC ZQAPHA DOTTED", 0x21, "Syriac"),
    c(0x0736, None, "SYRIAC RBASA ABOVE", 0x21, "Syriac"),
    c(0x0737, None, "SYRIAC RBASA BELOW", 0x21, "Syriac"),
    c(0x0738, None, "SYRIAC DOTTED ZLAMA HORIZONTAL", 0x21, "Syriac"),
    c(0x0739, None, "SYRIAC DOTTED ZLAMA ANGULAR", 0x21, "Syriac"),
    c(0x073A, None, "SYRIAC HBASA ABOVE", 0x21, "Syriac"),
    c(0x073B, None, "SYRIAC HBASA BELOW", 0x21, "Syriac"),
    c(0x073C, None, "SYRIAC HBASA-ESASA DOTTED", 0x21, "Syriac"),
    c(0x073D, None, "SYRIAC ESASA ABOVE", 0x21, "Syriac"),
    c(0x073E, None, "SYRIAC ESASA BELOW", 0x21, "Syriac"),
    c(0x073F, None, "SYRIAC RWAHA", 0x21, "Syriac"),
    c(0x0740, None, "SYRIAC FEMININE DOT", 0x20, "Syriac"),
    c(0x0741, None, "SYRIAC QUSHSHAYA", 0x20, "Syriac"),
    c(0x0742, None, "SYRIAC RUKKAKHA", 0x20, "Syriac"),
    c(0x0743, None, "SYRIAC TWO VERTICAL DOTS ABOVE", 0x20, "Syriac"),
    c(0x0744, None, "SYRIAC TWO VERTICAL DOTS BELOW", 0x20, "Syriac"),
    c(0x0745, None, "SYRIAC THREE DOTS ABOVE", 0x20, "Syriac"),
    c(0x0746, None, "SYRIAC THREE DOTS BELOW", 0x20, "Syriac"),
    c(0x0747, None, "SYRIAC OBLIQUE LINE ABOVE", 0x20, "Syriac"),
    c(0x0748, None, "SYRIAC OBLIQUE LINE BELOW", 0x20, "Syriac"),
    c(0x0749, None, "SYRIAC MUSIC", 0x20, "Syriac"),
    c(0x074A, None, "SYRIAC BARREKH", 0x20, "Syriac"),
    c(0x074D, None, "SYRIAC LETTER SOGDIAN ZHAIN", 0x31, "Syriac"),
    c(0x074E, None, "SYRIAC LETTER SOGDIAN KHAPH", 0x31, "Syriac"),
    c(0x074F, None, "SYRIAC LETTER SOGDIAN FE", 0x31, "Syriac"),
    c(0x0750, None, "ARABIC LETTER BEH WITH THREE DOTS HORIZONTALLY BELOW", 0x31, "Arabic_Sup"),
    c(0x0751, None, "ARABIC LETTER BEH WITH DOT BELOW AND THREE DOTS ABOVE", 0x31, "Arabic_Sup"),
    c(0x0752, None, "ARABIC LETTER BEH WITH THREE DOTS POINTING UPWARDS BELOW", 0x31, "Arabic_Sup"),
    c(0x0753, None, "ARABIC LETTER BEH WITH THREE DOTS POINTING UPWARDS BELOW AND TWO DOTS ABOVE", 0x31, "Arabic_Sup"),
    c(0x0754, None, "ARABIC LETTER BEH WITH TWO DOTS BELOW AND DOT ABOVE", 0x31, "Arabic_Sup"),
    c(0x0755, None, "ARABIC LETTER BEH WITH INVERTED SMALL V BELOW", 0x31, "Arabic_Sup"),
    c(0x0756, None, "ARABIC LETTER BEH WITH SMALL V", 0x31, "Arabic_Sup"),
    c(0x0757, None, "ARABIC LETTER HAH WITH TWO DOTS ABOVE", 0x31, "Arabic_Sup"),
    c(0x0758, None, "ARABIC LETTER HAH WITH THREE DOTS POINTING UPWARDS BELOW", 0x31, "Arabic_Sup"),
    c(0x0759, None, "ARABIC LETTER DAL WITH TWO DOTS VERTICALLY BELOW AND SMALL TAH", 0x31, "Arabic_Sup"),
    c(0x075A, None, "ARABIC LETTER DAL WITH INVERTED SMALL V BELOW", 0x31, "Arabic_Sup"),
    c(0x075B, None, "ARABIC LETTER REH WITH STROKE", 0x31, "Arabic_Sup"),
    c(0x075C, None, "ARABIC LETTER SEEN WITH FOUR DOTS ABOVE", 0x31, "Arabic_Sup"),
    c(0x075D, None, "ARABIC LETTER AIN WITH TWO DOTS ABOVE", 0x31, "Arabic_Sup"),
    c(0x075E, None, "ARABIC LETTER AIN WITH THREE DOTS POINTING DOWNWARDS ABOVE", 0x31, "Arabic_Sup"),
    c(0x075F, None, "ARABIC LETTER AIN WITH TWO DOTS VERTICALLY ABOVE", 0x31, "Arabic_Sup"),
    c(0x0760, None, "ARABIC LETTER FEH WITH TWO DOTS BELOW", 0x31, "Arabic_Sup"),
    c(0x0761, None, "ARABIC LETTER FEH WITH THREE DOTS POINTING UPWARDS BELOW", 0x31, "Arabic_Sup"),
    c(0x0762, None, "ARABIC LETTER KEHEH WITH DOT ABOVE", 0x31, "Arabic_Sup"),
    c(0x0763, None, "ARABIC LETTER KEHEH WITH THREE DOTS ABOVE", 0x31, "Arabic_Sup"),
    c(0x0764, None, "ARABIC LETTER KEHEH WITH THREE DOTS POINTING UPWARDS BELOW", 0x31, "Arabic_Sup"),
    c(0x0765, None, "ARABIC LETTER MEEM WITH DOT ABOVE", 0x31, "Arabic_Sup"),
    c(0x0766, None, "ARABIC LETTER MEEM WITH DOT BELOW", 0x31, "Arabic_Sup"),
    c(0x0767, None, "ARABIC LETTER NOON WITH TWO DOTS BELOW", 0x31, "Arabic_Sup"),
    c(0x0768, None, "ARABIC LETTER NOON WITH SMALL TAH", 0x31, "Arabic_Sup"),
    c(0x0769, None, "ARABIC LETTER NOON WITH SMALL V", 0x31, "Arabic_Sup"),
    c(0x076A, None, "ARABIC LETTER LAM WITH BAR", 0x31, "Arabic_Sup"),
    c(0x076B, None, "ARABIC LETTER REH WITH TWO DOTS VERTICALLY ABOVE", 0x31, "Arabic_Sup"),
    c(0x076C, None, "ARABIC LETTER REH WITH HAMZA ABOVE", 0x31, "Arabic_Sup"),
    c(0x076D, None, "ARABIC LETTER SEEN WITH TWO DOTS VERTICALLY ABOVE", 0x31, "Arabic_Sup"),
    c(0x076E, None, "ARABIC LETTER HAH WITH SMALL ARABIC LETTER TAH BELOW", 0x31, "Arabic_Sup"),
    c(0x076F, None, "ARABIC LETTER HAH WITH SMALL ARABIC LETTER TAH AND TWO DOTS", 0x31, "Arabic_Sup"),
    c(0x0770, None, "ARABIC LETTER SEEN WITH SMALL ARABIC LETTER TAH AND TWO DOTS", 0x31, "Arabic_Sup"),
    c(0x0771, None, "ARABIC LETTER REH WITH SMALL ARABIC LETTER TAH AND TWO DOTS", 0x31, "Arabic_Sup"),
    c(0x0772, None, "ARABIC LETTER HAH WITH SMALL ARABIC LETTER TAH ABOVE", 0x31, "Arabic_Sup"),
    c(0x0773, None, "ARABIC LETTER ALEF WITH EXTENDED ARABIC-INDIC DIGIT TWO ABOVE", 0x31, "Arabic_Sup"),
    c(0x0774, None, "ARABIC LETTER ALEF WITH EXTENDED ARABIC-INDIC DIGIT THREE ABOVE", 0x31, "Arabic_Sup"),
    c(0x0775, None, "ARABIC LETTER FARSI YEH WITH EXTENDED ARABIC-INDIC DIGIT TWO ABOVE", 0x31, "Arabic_Sup"),
    c(0x0776, None, "ARABIC LETTER FARSI YEH WITH EXTENDED ARABIC-INDIC DIGIT THREE ABOVE", 0x31, "Arabic_Sup"),
    c(0x0777, None, "ARABIC LETTER FARSI YEH WITH EXTENDED ARABIC-INDIC DIGIT FOUR BELOW", 0x31, "Arabic_Sup"),
    c(0x0778, None, "ARABIC LETTER WAW WITH EXTENDED ARABIC-INDIC DIGIT TWO ABOVE", 0x31, "Arabic_Sup"),
    c(0x0779, None, "ARABIC LETTER WAW WITH EXTENDED ARABIC-INDIC DIGIT THREE ABOVE", 0x31, "Arabic_Sup"),
    c(0x077A, None, "ARABIC LETTER YEH BARREE WITH EXTENDED ARABIC-INDIC DIGIT TWO ABOVE", 0x31, "Arabic_Sup"),
    c(0x077B, None, "ARABIC LETTER YEH BARREE WITH EXTENDED ARABIC-INDIC DIGIT THREE ABOVE", 0x31, "Arabic_Sup"),
    c(0x077C, None, "ARABIC LETTER HAH WITH EXTENDED ARABIC-INDIC DIGIT FOUR BELOW", 0x31, "Arabic_Sup"),
    c(0x077D, None, "ARABIC LETTER SEEN WITH EXTENDED ARABIC-INDIC DIGIT FOUR ABOVE", 0x31, "Arabic_Sup"),
    c(0x077E, None, "ARABIC LETTER SEEN WITH INVERTED V", 0x31, "Arabic_Sup"),
    c(0x077F, None, "ARABIC LETTER KAF WITH TWO DOTS ABOVE", 0x31, "Arabic_Sup"),
    c(0x0780, None, "THAANA LETTER HAA", 0x31, "Thaana"),
    c(0x0781, None, "THAANA LETTER SHAVIYANI", 0x31, "Thaana"),
    c(0x0782, None, "THAANA LETTER NOONU", 0x31, "Thaana"),
    c(0x0783, None, "THAANA LETTER RAA", 0x31, "Thaana"),
    c(0x0784, None, "THAANA LETTER BAA", 0x31, "Thaana"),
    c(0x0785, None, "THAANA LETTER LHAVIYANI", 0x31, "Thaana"),
    c(0x0786, None, "THAANA LETTER KAAFU", 0x31, "Thaana"),
    c(0x0787, None, "THAANA LETTER ALIFU", 0x31, "Thaana"),
    c(0x0788, None, "THAANA LETTER VAAVU", 0x31, "Thaana"),
    c(0x0789, None, "THAANA LETTER MEEMU", 0x31, "Thaana"),
    c(0x078A, None, "THAANA LETTER FAAFU", 0x31, "Thaana"),
    c(0x078B, None, "THAANA LETTER DHAALU", 0x31, "Thaana"),
    c(0x078C, None, "THAANA LETTER THAA", 0x31, "Thaana"),
    c(0x078D, None, "THAANA LETTER LAAMU", 0x31, "Thaana"),
    c(0x078E, None, "THAANA LETTER GAAFU", 0x31, "Thaana"),
    c(0x078F, None, "THAANA LETTER GNAVIYANI", 0x31, "Thaana"),
    c(0x0790, None, "THAANA LETTER SEENU", 0x31, "Thaana"),
    c(0x0791, None, "THAANA LETTER DAVIYANI", 0x31, "Thaana"),
    c(0x0792, None, "THAANA LETTER ZAVIYANI", 0x31, "Thaana"),
    c(0x0793, None, "THAANA LETTER TAVIYANI", 0x31, "Thaana"),
    c(0x0794, None, "THAANA LETTER YAA", 0x31, "Thaana"),
    c(0x0795, None, "THAANA LETTER PAVIYANI", 0x31, "Thaana"),
    c(0x0796, None, "THAANA LETTER JAVIYANI", 0x31, "Thaana"),
    c(0x0797, None, "THAANA LETTER CHAVIYANI", 0x31, "Thaana"),
    c(0x0798, None, "THAANA LETTER TTAA", 0x31, "Thaana"),
    c(0x0799, None, "THAANA LETTER HHAA", 0x31, "Thaana"),
    c(0x079A, None, "THAANA LETTER KHAA", 0x31, "Thaana"),
    c(0x079B, None, "THAANA LETTER THAALU", 0x31, "Thaana"),
    c(0x079C, None, "THAANA LETTER ZAA", 0x31, "Thaana"),
    c(0x079D, None, "THAANA LETTER SHEENU", 0x31, "Thaana"),
    c(0x079E, None, "THAANA LETTER SAADHU", 0x31, "Thaana"),
    c(0x079F, None, "THAANA LETTER DAADHU", 0x31, "Thaana"),
    c(0x07A0, None, "THAANA LETTER TO", 0x31, "Thaana"),
    c(0x07A1, None, "THAANA LETTER ZO", 0x31, "Thaana"),
    c(0x07A2, None, "THAANA LETTER AINU", 0x31, "Thaana"),
    c(0x07A3, None, "THAANA LETTER GHAINU", 0x31, "Thaana"),
    c(0x07A4, None, "THAANA LETTER QAAFU", 0x31, "Thaana"),
    c(0x07A5, None, "THAANA LETTER WAAVU", 0x31, "Thaana"),
    c(0x07A6, None, "THAANA ABAFILI", 0x21, "Thaana"),
    c(0x07A7, None, "THAANA AABAAFILI", 0x21, "Thaana"),
    c(0x07A8, None, "THAANA IBIFILI", 0x21, "Thaana"),
    c(0x07A9, None, "THAANA EEBEEFILI", 0x21, "Thaana"),
    c(0x07AA, None, "THAANA UBUFILI", 0x21, "Thaana"),
    c(0x07AB, None, "THAANA OOBOOFILI", 0x21, "Thaana"),
    c(0x07AC, None, "THAANA EBEFILI", 0x21, "Thaana"),
    c(0x07AD, None, "THAANA EYBEYFILI", 0x21, "Thaana"),
    c(0x07AE, None, "THAANA OBOFILI", 0x21, "Thaana"),
    c(0x07AF, None, "THAANA OABOAFILI", 0x21, "Thaana"),
    c(0x07B0, None, "THAANA SUKUN", 0x21, "Thaana"),
    c(0x07B1, None, "THAANA LETTER NAA", 0x31, "Thaana"),
    c(0x07C0, None, "NKO DIGIT ZERO", 0x20, "NKo"),
    c(0x07C1, None, "NKO DIGIT ONE", 0x20, "NKo"),
    c(0x07C2, None, "NKO DIGIT TWO", 0x20, "NKo"),
    c(0x07C3, None, "NKO DIGIT THREE", 0x20, "NKo"),
    c(0x07C4, None, "NKO DIGIT FOUR", 0x20, "NKo"),
    c(0x07C5, None, "NKO DIGIT FIVE", 0x20, "NKo"),
    c(0x07C6, None, "NKO DIGIT SIX", 0x20, "NKo"),
    c(0x07C7, None, "NKO DIGIT SEVEN", 0x20, "NKo"),
    c(0x07C8, None, "NKO DIGIT EIGHT", 0x20, "NKo"),
    c(0x07C9, None, "NKO DIGIT NINE", 0x20, "NKo"),
    c(0x07CA, None, "NKO LETTER A", 0x31, "NKo"),
    c(0x07CB, None, "NKO LETTER EE", 0x31, "NKo"),
    c(0x07CC, None, "NKO LETTER I", 0x31, "NKo"),
    c(0x07CD, None, "NKO LETTER E", 0x31, "NKo"),
    c(0x07CE, None, "NKO LETTER U", 0x31, "NKo"),
    c(0x07CF, None, "NKO LETTER OO", 0x31, "NKo"),
    c(0x07D0, None, "NKO LETTER O", 0x31, "NKo"),
    c(0x07D1, None, "NKO LETTER DAGBASINNA", 0x31, "NKo"),
    c(0x07D2, None, "NKO LETTER N", 0x31, "NKo"),
    c(0x07D3, None, "NKO LETTER BA", 0x31, "NKo"),
    c(0x07D4, None, "NKO LETTER PA", 0x31, "NKo"),
    c(0x07D5, None, "NKO LETTER TA", 0x31, "NKo"),
    c(0x07D6, None, "NKO LETTER JA", 0x31, "NKo"),
    c(0x07D7, None, "NKO LETTER CHA", 0x31, "NKo"),
    c(0x07D8, None, "NKO LETTER DA", 0x31, "NKo"),
    c(0x07D9, None, "NKO LETTER RA", 0x31, "NKo"),
    c(0x07DA, None, "NKO LETTER RRA", 0x31, "NKo"),
    c(0x07DB, None, "NKO LETTER SA", 0x31, "NKo"),
    c(0x07DC, None, "NKO LETTER GBA", 0x31, "NKo"),
    c(0x07DD, None, "NKO LETTER FA", 0x31, "NKo"),
    c(0x07DE, None, "NKO LETTER KA", 0x31, "NKo"),
    c(0x07DF, None, "NKO LETTER LA", 0x31, "NKo"),
    c(0x07E0, None, "NKO LETTER NA WOLOSO", 0x31, "NKo"),
    c(0x07E1, None, "NKO LETTER MA", 0x31, "NKo"),
    c(0x07E2, None, "NKO LETTER NYA", 0x31, "NKo"),
    c(0x07E3, None, "NKO LETTER NA", 0x31, "NKo"),
    c(0x07E4, None, "NKO LETTER HA", 0x31, "NKo"),
    c(0x07E5, None, "NKO LETTER WA", 0x31, "NKo"),
    c(0x07E6, None, "NKO LETTER YA", 0x31, "NKo"),
    c(0x07E7, None, "NKO LETTER NYA WOLOSO", 0x31, "NKo"),
    c(0x07E8, None, "NKO LETTER JONA JA", 0x31, "NKo"),
    c(0x07E9, None, "NKO LETTER JONA CHA", 0x31, "NKo"),
    c(0x07EA, None, "NKO LETTER JONA RA", 0x31, "NKo"),
    c(0x07EB, None, "NKO COMBINING SHORT HIGH TONE", 0x20, "NKo"),
    c(0x07EC, None, "NKO COMBINING SHORT LOW TONE", 0x20, "NKo"),
    c(0x07ED, None, "NKO COMBINING SHORT RISING TONE", 0x20, "NKo"),
    c(0x07EE, None, "NKO COMBINING LONG DESCENDING TONE", 0x20, "NKo"),
    c(0x07EF, None, "NKO COMBINING LONG HIGH TONE", 0x20, "NKo"),
    c(0x07F0, None, "NKO COMBINING LONG LOW TONE", 0x20, "NKo"),
    c(0x07F1, None, "NKO COMBINING LONG RISING TONE", 0x20, "NKo"),
    c(0x07F2, None, "NKO COMBINING NASALIZATION MARK", 0x20, "NKo"),
    c(0x07F3, None, "NKO COMBINING DOUBLE DOT ABOVE", 0x20, "NKo"),
    c(0x07F4, None, "NKO HIGH TONE APOSTROPHE", 0x31, "NKo"),
    c(0x07F5, None, "NKO LOW TONE APOSTROPHE", 0x31, "NKo"),
    c(0x07F6, None, "NKO SYMBOL OO DENNEN", 0x00, "NKo"),
    c(0x07F7, None, "NKO SYMBOL GBAKURUNEN", 0x00, "NKo"),
    c(0x07F8, None, "NKO COMMA", 0x00, "NKo"),
    c(0x07F9, None, "NKO EXCLAMATION MARK", 0x00, "NKo"),
    c(0x07FA, None, "NKO LAJANYALAN", 0x31, "NKo"),
    c(0x07FD, None, "NKO DANTAYALAN", 0x20, "NKo"),
    c(0x07FE, None, "NKO DOROME SIGN", 0x00, "NKo"),
    c(0x07FF, None, "NKO TAMAN SIGN", 0x00, "NKo"),
    c(0x0800, None, "SAMARITAN LETTER ALAF", 0x31, "Samaritan"),
    c(0x0801, None, "SAMARITAN LETTER BIT", 0x31, "Samaritan"),
    c(0x0802, None, "SAMARITAN LETTER GAMAN", 0x31, "Samaritan"),
    c(0x0803, None, "SAMARITAN LETTER DALAT", 0x31, "Samaritan"),
    c(0x0804, None, "SAMARITAN LETTER IY", 0x31, "Samaritan"),
    c(0x0805, None, "SAMARITAN LETTER BAA", 0x31, "Samaritan"),
    c(0x0806, None, "SAMARITAN LETTER ZEN", 0x31, "Samaritan"),
    c(0x0807, None, "SAMARITAN LETTER IT", 0x31, "Samaritan"),
    c(0x0808, None, "SAMARITAN LETTER TIT", 0x31, "Samaritan"),
    c(0x0809, None, "SAMARITAN LETTER YUT", 0x31, "Samaritan"),
    c(0x080A, None, "SAMARITAN LETTER KAAF", 0x31, "Samaritan"),
    c(0x080B, None, "SAMARITAN LETTER LABAT", 0x31, "Samaritan"),
    c(0x080C, None, "SAMARITAN LETTER MIM", 0x31, "Samaritan"),
    c(0x080D, None, "SAMARITAN LETTER NUN", 0x31, "Samaritan"),
    c(0x080E, None, "SAMARITAN LETTER SINGAAT", 0x31, "Samaritan"),
    c(0x080F, None, "SAMARITAN LETTER IN", 0x31, "Samaritan"),
    c(0x0810, None, "SAMARITAN LETTER FI", 0x31, "Samaritan"),
    c(0x0811, None, "SAMARITAN LETTER TSAADIY", 0x31, "Samaritan"),
    c(0x0812, None, "SAMARITAN LETTER QUF", 0x31, "Samaritan"),
    c(0x0813, None, "SAMARITAN LETTER RISH", 0x31, "Samaritan"),
    c(0x0814, None, "SAMARITAN LETTER SHAN", 0x31, "Samaritan"),
    c(0x0815, None, "SAMARITAN LETTER TAAF", 0x31, "Samaritan"),
    c(0x0816, None, "SAMARITAN MARK IN", 0x21, "Samaritan"),
    c(0x0817, None, "SAMARITAN MARK IN-ALAF", 0x21, "Samaritan"),
    c(0x0818, None, "SAMARITAN MARK OCCLUSION", 0x20, "Samaritan"),
    c(0x0819, None, "SAMARITAN MARK DAGESH", 0x20, "Samaritan"),
    c(0x081A, None, "SAMARITAN MODIFIER LETTER EPENTHETIC YUT", 0x31, "Samaritan"),
    c(0x081B, None, "SAMARITAN MARK EPENTHETIC YUT", 0x21, "Samaritan"),
    c(0x081C, None, "SAMARITAN VOWEL SIGN LONG E", 0x21, "Samaritan"),
    c(0x081D, None, "SAMARITAN VOWEL SIGN E", 0x21, "Samaritan"),
    c(0x081E, None, "SAMARITAN VOWEL SIGN OVERLONG AA", 0x21, "Samaritan"),
    c(0x081F, None, "SAMARITAN VOWEL SIGN LONG AA", 0x21, "Samaritan"),
    c(0x0820, None, "SAMARITAN VOWEL SIGN AA", 0x21, "Samaritan"),
    c(0x0821, None, "SAMARITAN VOWEL SIGN OVERLONG A", 0x21, "Samaritan"),
    c(0x0822, None, "SAMARITAN VOWEL SIGN LONG A", 0x21, "Samaritan"),
    c(0x0823, None, "SAMARITAN VOWEL SIGN A", 0x21, "Samaritan"),
    c(0x0824, None, "SAMARITAN MODIFIER LETTER SHORT A", 0x31, "Samaritan"),
    c(0x0825, None, "SAMARITAN VOWEL SIGN SHORT A", 0x21, "Samaritan"),
    c(0x0826, None, "SAMARITAN VOWEL SIGN LONG U", 0x21, "Samaritan"),
    c(0x0827, None, "SAMARITAN VOWEL SIGN U", 0x21, "Samaritan"),
    c(0x0828, None, "SAMARITAN MODIFIER LETTER I", 0x31, "Samaritan"),
    c(0x0829, None, "SAMARITAN VOWEL SIGN LONG I", 0x21, "Samaritan"),
    c(0x082A, None, "SAMARITAN VOWEL SIGN I", 0x21, "Samaritan"),
    c(0x082B, None, "SAMARITAN VOWEL SIGN O", 0x21, "Samaritan"),
    c(0x082C, None, "SAMARITAN VOWEL SIGN SUKUN", 0x21, "Samaritan"),
    c(0x082D, None, "SAMARITAN MARK NEQUDAA", 0x20, "Samaritan"),
    c(0x0830, None, "SAMARITAN PUNCTUATION NEQUDAA", 0x00, "Samaritan"),
    c(0x0831, None, "SAMARITAN PUNCTUATION AFSAAQ", 0x00, "Samaritan"),
    c(0x0832, None, "SAMARITAN PUNCTUATION ANGED", 0x00, "Samaritan"),
    c(0x0833, None, "SAMARITAN PUNCTUATION BAU", 0x00, "Samaritan"),
    c(0x0834, None, "SAMARITAN PUNCTUATION ATMAAU", 0x00, "Samaritan"),
    c(0x0835, None, "SAMARITAN PUNCTUATION SHIYYAALAA", 0x00, "Samaritan"),
    c(0x0836, None, "SAMARITAN ABBREVIATION MARK", 0x00, "Samaritan"),
    c(0x0837, None, "SAMARITAN PUNCTUATION MELODIC QITSA", 0x00, "Samaritan"),
    c(0x0838, None, "SAMARITAN PUNCTUATION ZIQAA", 0x00, "Samaritan"),
    c(0x0839, None, "SAMARITAN PUNCTUATION QITSA", 0x00, "Samaritan"),
    c(0x083A, None, "SAMARITAN PUNCTUATION ZAEF", 0x00, "Samaritan"),
    c(0x083B, None, "SAMARITAN PUNCTUATION TURU", 0x00, "Samaritan"),
    c(0x083C, None, "SAMARITAN PUNCTUATION ARKAANU", 0x00, "Samaritan"),
    c(0x083D, None, "SAMARITAN PUNCTUATION SOF MASHFAAT", 0x00, "Samaritan"),
    c(0x083E, None, "SAMARITAN PUNCTUATION ANNAAU", 0x00, "Samaritan"),
    c(0x0840, None, "MANDAIC LETTER HALQA", 0x31, "Mandaic"),
    c(0x0841, None, "MANDAIC LETTER AB", 0x31, "Mandaic"),
    c(0x0842, None, "MANDAIC LETTER AG", 0x31, "Mandaic"),
    c(0x0843, None, "MANDAIC LETTER AD", 0x31, "Mandaic"),
    c(0x0844, None, "MANDAIC LETTER AH", 0x31, "Mandaic"),
    c(0x0845, None, "MANDAIC LETTER USHENNA", 0x31, "Mandaic"),
    c(0x0846, None, "MANDAIC LETTER AZ", 0x31, "Mandaic"),
    c(0x0847, None, "MANDAIC LETTER IT", 0x31, "Mandaic"),
    c(0x0848, None, "MANDAIC LETTER ATT", 0x31, "Mandaic"),
    c(0x0849, None, "MANDAIC LETTER AKSA", 0x31, "Mandaic"),
    c(0x084A, None, "MANDAIC LETTER AK", 0x31, "Mandaic"),
    c(0x084B, None, "MANDAIC LETTER AL", 0x31, "Mandaic"),
    c(0x084C, None, "MANDAIC LETTER AM", 0x31, "Mandaic"),
    c(0x084D, None, "MANDAIC LETTER AN", 0x31, "Mandaic"),
    c(0x084E, None, "MANDAIC LETTER AS", 0x31, "Mandaic"),
    c(0x084F, None, "MANDAIC LETTER IN", 0x31, "Mandaic"),
    c(0x0850, None, "MANDAIC LETTER AP", 0x31, "Mandaic"),
    c(0x0851, None, "MANDAIC LETTER ASZ", 0x31, "Mandaic"),
    c(0x0852, None, "MANDAIC LETTER AQ", 0x31, "Mandaic"),
    c(0x0853, None, "MANDAIC LETTER AR", 0x31, "Mandaic"),
    c(0x0854, None, "MANDAIC LETTER ASH", 0x31, "Mandaic"),
    c(0x0855, None, "MANDAIC LETTER AT", 0x31, "Mandaic"),
    c(0x0856, None, "MANDAIC LETTER DUSHENNA", 0x31, "Mandaic"),
    c(0x0857, None, "MANDAIC LETTER KAD", 0x31, "Mandaic"),
    c(0x0858, None, "MANDAIC LETTER AIN", 0x31, "Mandaic"),
    c(0x0859, None, "MANDAIC AFFRICATION MARK", 0x20, "Mandaic"),
    c(0x085A, None, "MANDAIC VOCALIZATION MARK", 0x20, "Mandaic"),
    c(0x085B, None, "MANDAIC GEMINATION MARK", 0x20, "Mandaic"),
    c(0x085E, None, "MANDAIC PUNCTUATION", 0x00, "Mandaic"),
    c(0x0860, None, "SYRIAC LETTER MALAYALAM NGA", 0x31, "Syriac_Sup"),
    c(0x0861, None, "SYRIAC LETTER MALAYALAM JA", 0x31, "Syriac_Sup"),
    c(0x0862, None, "SYRIAC LETTER MALAYALAM NYA", 0x31, "Syriac_Sup"),
    c(0x0863, None, "SYRIAC LETTER MALAYALAM TTA", 0x31, "Syriac_Sup"),
    c(0x0864, None, "SYRIAC LETTER MALAYALAM NNA", 0x31, "Syriac_Sup"),
    c(0x0865, None, "SYRIAC LETTER MALAYALAM NNNA", 0x31, "Syriac_Sup"),
    c(0x0866, None, "SYRIAC LETTER MALAYALAM BHA", 0x31, "Syriac_Sup"),
    c(0x0867, None, "SYRIAC LETTER MALAYALAM RA", 0x31, "Syriac_Sup"),
    c(0x0868, None, "SYRIAC LETTER MALAYALAM LLA", 0x31, "Syriac_Sup"),
    c(0x0869, None, "SYRIAC LETTER MALAYALAM LLLA", 0x31, "Syriac_Sup"),
    c(0x086A, None, "SYRIAC LETTER MALAYALAM SSA", 0x31, "Syriac_Sup"),
    c(0x0870, None, "ARABIC LETTER ALEF WITH ATTACHED FATHA", 0x31, "Arabic_Ext_B"),
    c(0x0871, None, "ARABIC LETTER ALEF WITH ATTACHED TOP RIGHT FATHA", 0x31, "Arabic_Ext_B"),
    c(0x0872, None, "ARABIC LETTER ALEF WITH RIGHT MIDDLE STROKE", 0x31, "Arabic_Ext_B"),
    c(0x0873, None, "ARABIC LETTER ALEF WITH LEFT MIDDLE STROKE", 0x31, "Arabic_Ext_B"),
    c(0x0874, None, "ARABIC LETTER ALEF WITH ATTACHED KASRA", 0x31, "Arabic_Ext_B"),
    c(0x0875, None, "ARABIC LETTER ALEF WITH ATTACHED BOTTOM RIGHT KASRA", 0x31, "Arabic_Ext_B"),
    c(0x0876, None, "ARABIC LETTER ALEF WITH ATTACHED ROUND DOT ABOVE", 0x31, "Arabic_Ext_B"),
    c(0x0877, None, "ARABIC LETTER ALEF WITH ATTACHED RIGHT ROUND DOT", 0x31, "Arabic_Ext_B"),
    c(0x0878, None, "ARABIC LETTER ALEF WITH ATTACHED LEFT ROUND DOT", 0x31, "Arabic_Ext_B"),
    c(0x0879, None, "ARABIC LETTER ALEF WITH ATTACHED ROUND DOT BELOW", 0x31, "Arabic_Ext_B"),
    c(0x087A, None, "ARABIC LETTER ALEF WITH DOT ABOVE", 0x31, "Arabic_Ext_B"),
    c(0x087B, None, "ARABIC LETTER ALEF WITH ATTACHED TOP RIGHT FATHA AND DOT ABOVE", 0x31, "Arabic_Ext_B"),
    c(0x087C, None, "ARABIC LETTER ALEF WITH RIGHT MIDDLE STROKE AND DOT ABOVE", 0x31, "Arabic_Ext_B"),
    c(0x087D, None, "ARABIC LETTER ALEF WITH ATTACHED BOTTOM RIGHT KASRA AND DOT ABOVE", 0x31, "Arabic_Ext_B"),
    c(0x087E, None, "ARABIC LETTER ALEF WITH ATTACHED TOP RIGHT FATHA AND LEFT RING", 0x31, "Arabic_Ext_B"),
    c(0x087F, None, "ARABIC LETTER ALEF WITH RIGHT MIDDLE STROKE AND LEFT RING", 0x31, "Arabic_Ext_B"),
    c(0x0880, None, "ARABIC LETTER ALEF WITH ATTACHED BOTTOM RIGHT KASRA AND LEFT RING", 0x31, "Arabic_Ext_B"),
    c(0x0881, None, "ARABIC LETTER ALEF WITH ATTACHED RIGHT HAMZA", 0x31, "Arabic_Ext_B"),
    c(0x0882, None, "ARABIC LETTER ALEF WITH ATTACHED LEFT HAMZA", 0x31, "Arabic_Ext_B"),
    c(0x0883, None, "ARABIC TATWEEL WITH OVERSTRUCK HAMZA", 0x31, "Arabic_Ext_B"),
    c(0x0884, None, "ARABIC TATWEEL WITH OVERSTRUCK WAW", 0x31, "Arabic_Ext_B"),
    c(0x0885, None, "ARABIC TATWEEL WITH TWO DOTS BELOW", 0x31, "Arabic_Ext_B"),
    c(0x0886, None, "ARABIC LETTER THIN YEH", 0x31, "Arabic_Ext_B"),
    c(0x0887, None, "ARABIC BASELINE ROUND DOT", 0x31, "Arabic_Ext_B"),
    c(0x0888, None, "ARABIC RAISED ROUND DOT", 0x00, "Arabic_Ext_B"),
    c(0x0889, None, "ARABIC LETTER NOON WITH INVERTED SMALL V", 0x31, "Arabic_Ext_B"),
    c(0x088A, None, "ARABIC LETTER HAH WITH INVERTED SMALL V BELOW", 0x31, "Arabic_Ext_B"),
    c(0x088B, None, "ARABIC LETTER TAH WITH DOT BELOW", 0x31, "Arabic_Ext_B"),
    c(0x088C, None, "ARABIC LETTER TAH WITH THREE DOTS BELOW", 0x31, "Arabic_Ext_B"),
    c(0x088D, None, "ARABIC LETTER KEHEH WITH TWO DOTS VERTICALLY BELOW", 0x31, "Arabic_Ext_B"),
    c(0x088E, None, "ARABIC VERTICAL TAIL", 0x31, "Arabic_Ext_B"),
    c(0x0890, None, "ARABIC POUND MARK ABOVE", 0x00, "Arabic_Ext_B"),
    c(0x0891, None, "ARABIC PIASTRE MARK ABOVE", 0x00, "Arabic_Ext_B"),
    c(0x0898, None, "ARABIC SMALL HIGH WORD AL-JUZ", 0x20, "Arabic_Ext_B"),
    c(0x0899, None, "ARABIC SMALL LOW WORD ISHMAAM", 0x20, "Arabic_Ext_B"),
    c(0x089A, None, "ARABIC SMALL LOW WORD IMAALA", 0x20, "Arabic_Ext_B"),
    c(0x089B, None, "ARABIC SMALL LOW WORD TASHEEL", 0x20, "Arabic_Ext_B"),
    c(0x089C, None, "ARABIC MADDA WAAJIB", 0x20, "Arabic_Ext_B"),
    c(0x089D, None, "ARABIC SUPERSCRIPT ALEF MOKHASSAS", 0x20, "Arabic_Ext_B"),
    c(0x089E, None, "ARABIC DOUBLED MADDA", 0x20, "Arabic_Ext_B"),
    c(0x089F, None, "ARABIC HALF MADDA OVER MADDA", 0x20, "Arabic_Ext_B"),
    c(0x08A0, None, "ARABIC LETTER BEH WITH SMALL V BELOW", 0x31, "Arabic_Ext_A"),
    c(0x08A1, None, "ARABIC LETTER BEH WITH HAMZA ABOVE", 0x31, "Arabic_Ext_A"),
    c(0x08A2, None, "ARABIC LETTER JEEM WITH TWO DOTS ABOVE", 0x31, "Arabic_Ext_A"),
    c(0x08A3, None, "ARABIC LETTER TAH WITH TWO DOTS ABOVE", 0x31, "Arabic_Ext_A"),
    c(0x08A4, None, "ARABIC LETTER FEH WITH DOT BELOW AND THREE DOTS ABOVE", 0x31, "Arabic_Ext_A"),
    c(0x08A5, None, "ARABIC LETTER QAF WITH DOT BELOW", 0x31, "Arabic_Ext_A"),
    c(0x08A6, None, "ARABIC LETTER LAM WITH DOUBLE BAR", 0x31, "Arabic_Ext_A"),
    c(0x08A7, None, "ARABIC LETTER MEEM WITH THREE DOTS ABOVE", 0x31, "Arabic_Ext_A"),
    c(0x08A8, None, "ARABIC LETTER YEH WITH TWO DOTS BELOW AND HAMZA ABOVE", 0x31, "Arabic_Ext_A"),
    c(0x08A9, None, "ARABIC LETTER YEH WITH TWO DOTS BELOW AND DOT ABOVE", 0x31, "Arabic_Ext_A"),
    c(0x08AA, None, "ARABIC LETTER REH WITH LOOP", 0x31, "Arabic_Ext_A"),
    c(0x08AB, None, "ARABIC LETTER WAW WITH DOT WITHIN", 0x31, "Arabic_Ext_A"),
    c(0x08AC, None, "ARABIC LETTER ROHINGYA YEH", 0x31, "Arabic_Ext_A"),
    c(0x08AD, None, "ARABIC LETTER LOW ALEF", 0x31, "Arabic_Ext_A"),
    c(0x08AE, None, "ARABIC LETTER DAL WITH THREE DOTS BELOW", 0x31, "Arabic_Ext_A"),
    c(0x08AF, None, "ARABIC LETTER SAD WITH THREE DOTS BELOW", 0x31, "Arabic_Ext_A"),
    c(0x08B0, None, "ARABIC LETTER GAF WITH INVERTED STROKE", 0x31, "Arabic_Ext_A"),
    c(0x08B1, None, "ARABIC LETTER STRAIGHT WAW", 0x31, "Arabic_Ext_A"),
    c(0x08B2, None, "ARABIC LETTER ZAIN WITH INVERTED V ABOVE", 0x31, "Arabic_Ext_A"),
    c(0x08B3, None, "ARABIC LETTER AIN WITH THREE DOTS BELOW", 0x31, "Arabic_Ext_A"),
    c(0x08B4, None, "ARABIC LETTER KAF WITH DOT BELOW", 0x31, "Arabic_Ext_A"),
    c(0x08B5, None, "ARABIC LETTER QAF WITH DOT BELOW AND NO DOTS ABOVE", 0x31, "Arabic_Ext_A"),
    c(0x08B6, None, "ARABIC LETTER BEH WITH SMALL MEEM ABOVE", 0x31, "Arabic_Ext_A"),
    c(0x08B7, None, "ARABIC LETTER PEH WITH SMALL MEEM ABOVE", 0x31, "Arabic_Ext_A"),
    c(0x08B8, None, "ARABIC LETTER TEH WITH SMALL TEH ABOVE", 0x31, "Arabic_Ext_A"),
    c(0x08B9, None, "ARABIC LETTER REH WITH SMALL NOON ABOVE", 0x31, "Arabic_Ext_A"),
    c(0x08BA, None, "ARABIC LETTER YEH WITH TWO DOTS BELOW AND SMALL NOON ABOVE", 0x31, "Arabic_Ext_A"),
    c(0x08BB, None, "ARABIC LETTER AFRICAN FEH", 0x31, "Arabic_Ext_A"),
    c(0x08BC, None, "ARABIC LETTER AFRICAN QAF", 0x31, "Arabic_Ext_A"),
    c(0x08BD, None, "ARABIC LETTER AFRICAN NOON", 0x31, "Arabic_Ext_A"),
    c(0x08BE, None, "ARABIC LETTER PEH WITH SMALL V", 0x31, "Arabic_Ext_A"),
    c(0x08BF, None, "ARABIC LETTER TEH WITH SMALL V", 0x31, "Arabic_Ext_A"),
    c(0x08C0, None, "ARABIC LETTER TTEH WITH SMALL V", 0x31, "Arabic_Ext_A"),
    c(0x08C1, None, "ARABIC LETTER TCHEH WITH SMALL V", 0x31, "Arabic_Ext_A"),
    c(0x08C2, None, "ARABIC LETTER KEHEH WITH SMALL V", 0x31, "Arabic_Ext_A"),
    c(0x08C3, None, "ARABIC LETTER GHAIN WITH THREE DOTS ABOVE", 0x31, "Arabic_Ext_A"),
    c(0x08C4, None, "ARABIC LETTER AFRICAN QAF WITH THREE DOTS ABOVE", 0x31, "Arabic_Ext_A"),
    c(0x08C5, None, "ARABIC LETTER JEEM WITH THREE DOTS ABOVE", 0x31, "Arabic_Ext_A"),
    c(0x08C6, None, "ARABIC LETTER JEEM WITH THREE DOTS BELOW", 0x31, "Arabic_Ext_A"),
    c(0x08C7, None, "ARABIC LETTER LAM WITH SMALL ARABIC LETTER TAH ABOVE", 0x31, "Arabic_Ext_A"),
    c(0x08C8, None, "ARABIC LETTER GRAF", 0x31, "Arabic_Ext_A"),
    c(0x08C9, None, "ARABIC SMALL FARSI YEH", 0x31, "Arabic_Ext_A"),
    c(0x08CA, None, "ARABIC SMALL HIGH FARSI YEH", 0x20, "Arabic_Ext_A"),
    c(0x08CB, None, "ARABIC SMALL HIGH YEH BARREE WITH TWO DOTS BELOW", 0x20, "Arabic_Ext_A"),
    c(0x08CC, None, "ARABIC SMALL HIGH WORD SAH", 0x20, "Arabic_Ext_A"),
    c(0x08CD, None, "ARABIC SMALL HIGH ZAH", 0x20, "Arabic_Ext_A"),
    c(0x08CE, None, "ARABIC LARGE ROUND DOT ABOVE", 0x20, "Arabic_Ext_A"),
    c(0x08CF, None, "ARABIC LARGE ROUND DOT BELOW", 0x20, "Arabic_Ext_A"),
    c(0x08D0, None, "ARABIC SUKUN BELOW", 0x20, "Arabic_Ext_A"),
    c(0x08D1, None, "ARABIC LARGE CIRCLE BELOW", 0x20, "Arabic_Ext_A"),
    c(0x08D2, None, "ARABIC LARGE ROUND DOT INSIDE CIRCLE BELOW", 0x20, "Arabic_Ext_A"),
    c(0x08D3, None, "ARABIC SMALL LOW WAW", 0x20, "Arabic_Ext_A"),
    c(0x08D4, None, "ARABIC SMALL HIGH WORD AR-RUB", 0x21, "Arabic_Ext_A"),
    c(0x08D5, None, "ARABIC SMALL HIGH SAD", 0x21, "Arabic_Ext_A"),
    c(0x08D6, None, "ARABIC SMALL HIGH AIN", 0x21, "Arabic_Ext_A"),
    c(0x08D7, None, "ARABIC SMALL HIGH QAF", 0x21, "Arabic_Ext_A"),
    c(0x08D8, None, "ARABIC SMALL HIGH NOON WITH KASRA", 0x21, "Arabic_Ext_A"),
    c(0x08D9, None, "ARABIC SMALL LOW NOON WITH KASRA", 0x21, "Arabic_Ext_A"),
    c(0x08DA, None, "ARABIC SMALL HIGH WORD ATH-THALATHA", 0x21, "Arabic_Ext_A"),
    c(0x08DB, None, "ARABIC SMALL HIGH WORD AS-SAJDA", 0x21, "Arabic_Ext_A"),
    c(0x08DC, None, "ARABIC SMALL HIGH WORD AN-NISF", 0x21, "Arabic_Ext_A"),
    c(0x08DD, None, "ARABIC SMALL HIGH WORD SAKTA", 0x21, "Arabic_Ext_A"),
    c(0x08DE, None, "ARABIC SMALL HIGH WORD QIF", 0x21, "Arabic_Ext_A"),
    c(0x08DF, None, "ARABIC SMALL HIGH WORD WAQFA", 0x21, "Arabic_Ext_A"),
    c(0x08E0, None, "ARABIC SMALL HIGH FOOTNOTE MARKER", 0x20, "Arabic_Ext_A"),
    c(0x08E1, None, "ARABIC SMALL HIGH SIGN SAFHA", 0x20, "Arabic_Ext_A"),
    c(0x08E2, None, "ARABIC DISPUTED END OF AYAH", 0x00, "Arabic_Ext_A"),
    c(0x08E3, None, "ARABIC TURNED DAMMA BELOW", 0x21, "Arabic_Ext_A"),
    c(0x08E4, None, "ARABIC CURLY FATHA", 0x21, "Arabic_Ext_A"),
    c(0x08E5, None, "ARABIC CURLY DAMMA", 0x21, "Arabic_Ext_A"),
    c(0x08E6, None, "ARABIC CURLY KASRA", 0x21, "Arabic_Ext_A"),
    c(0x08E7, None, "ARABIC CURLY FATHATAN", 0x21, "Arabic_Ext_A"),
    c(0x08E8, None, "ARABIC CURLY DAMMATAN", 0x21, "Arabic_Ext_A"),
    c(0x08E9, None, "ARABIC CURLY KASRATAN", 0x21, "Arabic_Ext_A"),
    c(0x08EA, None, "ARABIC TONE ONE DOT ABOVE", 0x20, "Arabic_Ext_A"),
    c(0x08EB, None, "ARABIC TONE TWO DOTS ABOVE", 0x20, "Arabic_Ext_A"),
    c(0x08EC, None, "ARABIC TONE LOOP ABOVE", 0x20, "Arabic_Ext_A"),
    c(0x08ED, None, "ARABIC TONE ONE DOT BELOW", 0x20, "Arabic_Ext_A"),
    c(0x08EE, None, "ARABIC TONE TWO DOTS BELOW", 0x20, "Arabic_Ext_A"),
    c(0x08EF, None, "ARABIC TONE LOOP BELOW", 0x20, "Arabic_Ext_A"),
    c(0x08F0, None, "ARABIC OPEN FATHATAN", 0x21, "Arabic_Ext_A"),
    c(0x08F1, None, "ARABIC OPEN DAMMATAN", 0x21, "Arabic_Ext_A"),
    c(0x08F2, None, "ARABIC OPEN KASRATAN", 0x21, "Arabic_Ext_A"),
    c(0x08F3, None, "ARABIC SMALL HIGH WAW", 0x21, "Arabic_Ext_A"),
    c(0x08F4, None, "ARABIC FATHA WITH RING", 0x21, "Arabic_Ext_A"),
    c(0x08F5, None, "ARABIC FATHA WITH DOT ABOVE", 0x21, "Arabic_Ext_A"),
    c(0x08F6, None, "ARABIC KASRA WITH DOT BELOW", 0x21, "Arabic_Ext_A"),
    c(0x08F7, None, "ARABIC LEFT ARROWHEAD ABOVE", 0x21, "Arabic_Ext_A"),
    c(0x08F8, None, "ARABIC RIGHT ARROWHEAD ABOVE", 0x21, "Arabic_Ext_A"),
    c(0x08F9, None, "ARABIC LEFT ARROWHEAD BELOW", 0x21, "Arabic_Ext_A"),
    c(0x08FA, None, "ARABIC RIGHT ARROWHEAD BELOW", 0x21, "Arabic_Ext_A"),
    c(0x08FB, None, "ARABIC DOUBLE RIGHT ARROWHEAD ABOVE", 0x21, "Arabic_Ext_A"),
    c(0x08FC, None, "ARABIC DOUBLE RIGHT ARROWHEAD ABOVE WITH DOT", 0x21, "Arabic_Ext_A"),
    c(0x08FD, None, "ARABIC RIGHT ARROWHEAD ABOVE WITH DOT", 0x21, "Arabic_Ext_A"),
    c(0x08FE, None, "ARABIC DAMMA WITH DOT", 0x21, "Arabic_Ext_A"),
    c(0x08FF, None, "ARABIC MARK SIDEWAYS NOON GHUNNA", 0x21, "Arabic_Ext_A"),
    c(0x0900, None, "DEVANAGARI SIGN INVERTED CANDRABINDU", 0x21, "Devanagari"),
    c(0x0901, None, "DEVANAGARI SIGN CANDRABINDU", 0x21, "Devanagari"),
    c(0x0902, None, "DEVANAGARI SIGN ANUSVARA", 0x21, "Devanagari"),
    c(0x0903, None, "DEVANAGARI SIGN VISARGA", 0x21, "Devanagari"),
    c(0x0904, None, "DEVANAGARI LETTER SHORT A", 0x31, "Devanagari"),
    c(0x0905, None, "DEVANAGARI LETTER A", 0x31, "Devanagari"),
    c(0x0906, None, "DEVANAGARI LETTER AA", 0x31, "Devanagari"),
    c(0x0907, None, "DEVANAGARI LETTER I", 0x31, "Devanagari"),
    c(0x0908, None, "DEVANAGARI LETTER II", 0x31, "Devanagari"),
    c(0x0909, None, "DEVANAGARI LETTER U", 0x31, "Devanagari"),
    c(0x090A, None, "DEVANAGARI LETTER UU", 0x31, "Devanagari"),
    c(0x090B, None, "DEVANAGARI LETTER VOCALIC R", 0x31, "Devanagari"),
    c(0x090C, None, "DEVANAGARI LETTER VOCALIC L", 0x31, "Devanagari"),
    c(0x090D, None, "DEVANAGARI LETTER CANDRA E", 0x31, "Devanagari"),
    c(0x090E, None, "DEVANAGARI LETTER SHORT E", 0x31, "Devanagari"),
    c(0x090F, None, "DEVANAGARI LETTER E", 0x31, "Devanagari"),
    c(0x0910, None, "DEVANAGARI LETTER AI", 0x31, "Devanagari"),
    c(0x0911, None, "DEVANAGARI LETTER CANDRA O", 0x31, "Devanagari"),
    c(0x0912, None, "DEVANAGARI LETTER SHORT O", 0x31, "Devanagari"),
    c(0x0913, None, "DEVANAGARI LETTER O", 0x31, "Devanagari"),
    c(0x0914, None, "DEVANAGARI LETTER AU", 0x31, "Devanagari"),
    c(0x0915, None, "DEVANAGARI LETTER KA", 0x31, "Devanagari"),
    c(0x0916, None, "DEVANAGARI LETTER KHA", 0x31, "Devanagari"),
    c(0x0917, None, "DEVANAGARI LETTER GA", 0x31, "Devanagari"),
    c(0x0918, None, "DEVANAGARI LETTER GHA", 0x31, "Devanagari"),
    c(0x0919, None, "DEVANAGARI LETTER NGA", 0x31, "Devanagari"),
    c(0x091A, None, "DEVANAGARI LETTER CA", 0x31, "Devanagari"),
    c(0x091B, None, "DEVANAGARI LETTER CHA", 0x31, "Devanagari"),
    c(0x091C, None, "DEVANAGARI LETTER JA", 0x31, "Devanagari"),
    c(0x091D, None, "DEVANAGARI LETTER JHA", 0x31, "Devanagari"),
    c(0x091E, None, "DEVANAGARI LETTER NYA", 0x31, "Devanagari"),
    c(0x091F, None, "DEVANAGARI LETTER TTA", 0x31, "Devanagari"),
    c(0x0920, None, "DEVANAGARI LETTER TTHA", 0x31, "Devanagari"),
    c(0x0921, None, "DEVANAGARI LETTER DDA", 0x31, "Devanagari"),
    c(0x0922, None, "DEVANAGARI LETTER DDHA", 0x31, "Devanagari"),
    c(0x0923, None, "DEVANAGARI LETTER NNA", 0x31, "Devanagari"),
    c(0x0924, None, "DEVANAGARI LETTER TA", 0x31, "Devanagari"),
    c(0x0925, None, "DEVANAGARI LETTER THA", 0x31, "Devanagari"),
    c(0x0926, None, "DEVANAGARI LETTER DA", 0x31, "Devanagari"),
    c(0x0927, None, "DEVANAGARI LETTER DHA", 0x31, "Devanagari"),
    c(0x0928, None, "DEVANAGARI LETTER NA", 0x31, "Devanagari"),
    c(0x0929, None, "DEVANAGARI LETTER NNNA", 0x31, "Devanagari"),
    c(0x092A, None, "DEVANAGARI LETTER PA", 0x31, "Devanagari"),
    c(0x092B, None, "DEVANAGARI LETTER PHA", 0x31, "Devanagari"),
    c(0x092C, None, "DEVANAGARI LETTER BA", 0x31, "Devanagari"),
    c(0x092D, None, "DEVANAGARI LETTER BHA", 0x31, "Devanagari"),
    c(0x092E, None, "DEVANAGARI LETTER MA", 0x31, "Devanagari"),
    c(0x092F, None, "DEVANAGARI LETTER YA", 0x31, "Devanagari"),
    c(0x0930, None, "DEVANAGARI LETTER RA", 0x31, "Devanagari"),
    c(0x0931, None, "DEVANAGARI LETTER RRA", 0x31, "Devanagari"),
    c(0x0932, None, "DEVANAGARI LETTER LA", 0x31, "Devanagari"),
    c(0x0933, None, "DEVANAGARI LETTER LLA", 0x31, "Devanagari"),
    c(0x0934, None, "DEVANAGARI LETTER LLLA", 0x31, "Devanagari"),
    c(0x0935, None, "DEVANAGARI LETTER VA", 0x31, "Devanagari"),
    c(0x0936, None, "DEVANAGARI LETTER SHA", 0x31, "Devanagari"),
    c(0x0937, None, "DEVANAGARI LETTER SSA", 0x31, "Devanagari"),
    c(0x0938, None, "DEVANAGARI LETTER SA", 0x31, "Devanagari"),
    c(0x0939, None, "DEVANAGARI LETTER HA", 0x31, "Devanagari"),
    c(0x093A, None, "DEVANAGARI VOWEL SIGN OE", 0x21, "Devanagari"),
    c(0x093B, None, "DEVANAGARI VOWEL SIGN OOE", 0x21, "Devanagari"),
    c(0x093C, None, "DEVANAGARI SIGN NUKTA", 0x20, "Devanagari"),
    c(0x093D, None, "DEVANAGARI SIGN AVAGRAHA", 0x31, "Devanagari"),
    c(0x093E, None, "DEVANAGARI VOWEL SIGN AA", 0x21, "Devanagari"),
    c(0x093F, None, "DEVANAGARI VOWEL SIGN I", 0x21, "Devanagari"),
    c(0x0940, None, "DEVANAGARI VOWEL SIGN II", 0x21, "Devanagari"),
    c(0x0941, None, "DEVANAGARI VOWEL SIGN U", 0x21, "Devanagari"),
    c(0x0942, None, "DEVANAGARI VOWEL SIGN UU", 0x21, "Devanagari"),
    c(0x0943, None, "DEVANAGARI VOWEL SIGN VOCALIC R", 0x21, "Devanagari"),
    c(0x0944, None, "DEVANAGARI VOWEL SIGN VOCALIC RR", 0x21, "Devanagari"),
    c(0x0945, None, "DEVANAGARI VOWEL SIGN CANDRA E", 0x21, "Devanagari"),
    c(0x0946, None, "DEVANAGARI VOWEL SIGN SHORT E", 0x21, "Devanagari"),
    c(0x0947, None, "DEVANAGARI VOWEL SIGN E", 0x21, "Devanagari"),
    c(0x0948, None, "DEVANAGARI VOWEL SIGN AI", 0x21, "Devanagari"),
    c(0x0949, None, "DEVANAGARI VOWEL SIGN CANDRA O", 0x21, "Devanagari"),
    c(0x094A, None, "DEVANAGARI VOWEL SIGN SHORT O", 0x21, "Devanagari"),
    c(0x094B, None, "DEVANAGARI VOWEL SIGN O", 0x21, "Devanagari"),
    c(0x094C, None, "DEVANAGARI VOWEL SIGN AU", 0x21, "Devanagari"),
    c(0x094D, None, "DEVANAGARI SIGN VIRAMA", 0x20, "Devanagari"),
    c(0x094E, None, "DEVANAGARI VOWEL SIGN PRISHTHAMATRA E", 0x21, "Devanagari"),
    c(0x094F, None, "DEVANAGARI VOWEL SIGN AW", 0x21, "Devanagari"),
    c(0x0950, None, "DEVANAGARI OM", 0x31, "Devanagari"),
    c(0x0951, None, "DEVANAGARI STRESS SIGN UDATTA", 0x20, "Devanagari"),
    c(0x0952, None, "DEVANAGARI STRESS SIGN ANUDATTA", 0x20, "Devanagari"),
    c(0x0953, None, "DEVANAGARI GRAVE ACCENT", 0x20, "Devanagari"),
    c(0x0954, None, "DEVANAGARI ACUTE ACCENT", 0x20, "Devanagari"),
    c(0x0955, None, "DEVANAGARI VOWEL SIGN CANDRA LONG E", 0x21, "Devanagari"),
    c(0x0956, None, "DEVANAGARI VOWEL SIGN UE", 0x21, "Devanagari"),
    c(0x0957, None, "DEVANAGARI VOWEL SIGN UUE", 0x21, "Devanagari"),
    c(0x0958, None, "DEVANAGARI LETTER QA", 0x31, "Devanagari"),
    c(0x0959, None, "DEVANAGARI LETTER KHHA", 0x31, "Devanagari"),
    c(0x095A, None, "DEVANAGARI LETTER GHHA", 0x31, "Devanagari"),
    c(0x095B, None, "DEVANAGARI LETTER ZA", 0x31, "Devanagari"),
    c(0x095C, None, "DEVANAGARI LETTER DDDHA", 0x31, "Devanagari"),
    c(0x095D, None, "DEVANAGARI LETTER RHA", 0x31, "Devanagari"),
    c(0x095E, None, "DEVANAGARI LETTER FA", 0x31, "Devanagari"),
    c(0x095F, None, "DEVANAGARI LETTER YYA", 0x31, "Devanagari"),
    c(0x0960, None, "DEVANAGARI LETTER VOCALIC RR", 0x31, "Devanagari"),
    c(0x0961, None, "DEVANAGARI LETTER VOCALIC LL", 0x31, "Devanagari"),
    c(0x0962, None, "DEVANAGARI VOWEL SIGN VOCALIC L", 0x21, "Devanagari"),
    c(0x0963, None, "DEVANAGARI VOWEL SIGN VOCALIC LL", 0x21, "Devanagari"),
    c(0x0964, None, "DEVANAGARI DANDA", 0x00, "Devanagari"),
    c(0x0965, None, "DEVANAGARI DOUBLE DANDA", 0x00, "Devanagari"),
    c(0x0966, None, "DEVANAGARI DIGIT ZERO", 0x20, "Devanagari"),
    c(0x0967, None, "DEVANAGARI DIGIT ONE", 0x20, "Devanagari"),
    c(0x0968, None, "DEVANAGARI DIGIT TWO", 0x20, "Devanagari"),
    c(0x0969, None, "DEVANAGARI DIGIT THREE", 0x20, "Devanagari"),
    c(0x096A, None, "DEVANAGARI DIGIT FOUR", 0x20, "Devanagari"),
    c(0x096B, None, "DEVANAGARI DIGIT FIVE", 0x20, "Devanagari"),
    c(0x096C, None, "DEVANAGARI DIGIT SIX", 0x20, "Devanagari"),
    c(0x096D, None, "DEVANAGARI DIGIT SEVEN", 0x20, "Devanagari"),
    c(0x096E, None, "DEVANAGARI DIGIT EIGHT", 0x20, "Devanagari"),
    c(0x096F, None, "DEVANAGARI DIGIT NINE", 0x20, "Devanagari"),
    c(0x0970, None, "DEVANAGARI ABBREVIATION SIGN", 0x00, "Devanagari"),
    c(0x0971, None, "DEVANAGARI SIGN HIGH SPACING DOT", 0x31, "Devanagari"),
    c(0x0972, None, "DEVANAGARI LETTER CANDRA A", 0x31, "Devanagari"),
    c(0x0973, None, "DEVANAGARI LETTER OE", 0x31, "Devanagari"),
    c(0x0974, None, "DEVANAGARI LETTER OOE", 0x31, "Devanagari"),
    c(0x0975, None, "DEVANAGARI LETTER AW", 0x31, "Devanagari"),
    c(0x0976, None, "DEVANAGARI LETTER UE", 0x31, "Devanagari"),
    c(0x0977, None, "DEVANAGARI LETTER UUE", 0x31, "Devanagari"),
    c(0x0978, None, "DEVANAGARI LETTER MARWARI DDA", 0x31, "Devanagari"),
    c(0x0979, None, "DEVANAGARI LETTER ZHA", 0x31, "Devanagari"),
    c(0x097A, None, "DEVANAGARI LETTER HEAVY YA", 0x31, "Devanagari"),
    c(0x097B, None, "DEVANAGARI LETTER GGA", 0x31, "Devanagari"),
    c(0x097C, None, "DEVANAGARI LETTER JJA", 0x31, "Devanagari"),
    c(0x097D, None, "DEVANAGARI LETTER GLOTTAL STOP", 0x31, "Devanagari"),
    c(0x097E, None, "DEVANAGARI LETTER DDDA", 0x31, "Devanagari"),
    c(0x097F, None, "DEVANAGARI LETTER BBA", 0x31, "Devanagari"),
    c(0x0980, None, "BENGALI ANJI", 0x31, "Bengali"),
    c(0x0981, None, "BENGALI SIGN CANDRABINDU", 0x21, "Bengali"),
    c(0x0982, None, "BENGALI SIGN ANUSVARA", 0x21, "Bengali"),
    c(0x0983, None, "BENGALI SIGN VISARGA", 0x21, "Bengali"),
    c(0x0985, None, "BENGALI LETTER A", 0x31, "Bengali"),
    c(0x0986, None, "BENGALI LETTER AA", 0x31, "Bengali"),
    c(0x0987, None, "BENGALI LETTER I", 0x31, "Bengali"),
    c(0x0988, None, "BENGALI LETTER II", 0x31, "Bengali"),
    c(0x0989, None, "BENGALI LETTER U", 0x31, "Bengali"),
    c(0x098A, None, "BENGALI LETTER UU", 0x31, "Bengali"),
    c(0x098B, None, "BENGALI LETTER VOCALIC R", 0x31, "Bengali"),
    c(0x098C, None, "BENGALI LETTER VOCALIC L", 0x31, "Bengali"),
    c(0x098F, None, "BENGALI LETTER E", 0x31, "Bengali"),
    c(0x0990, None, "BENGALI LETTER AI", 0x31, "Bengali"),
    c(0x0993, None, "BENGALI LETTER O", 0x31, "Bengali"),
    c(0x0994, None, "BENGALI LETTER AU", 0x31, "Bengali"),
    c(0x0995, None, "BENGALI LETTER KA", 0x31, "Bengali"),
    c(0x0996, None, "BENGALI LETTER KHA", 0x31, "Bengali"),
    c(0x0997, None, "BENGALI LETTER GA", 0x31, "Bengali"),
    c(0x0998, None, "BENGALI LETTER GHA", 0x31, "Bengali"),
    c(0x0999, None, "BENGALI LETTER NGA", 0x31, "Bengali"),
    c(0x099A, None, "BENGALI LETTER CA", 0x31, "Bengali"),
    c(0x099B, None, "BENGALI LETTER CHA", 0x31, "Bengali"),
    c(0x099C, None, "BENGALI LETTER JA", 0x31, "Bengali"),
    c(0x099D, None, "BENGALI LETTER JHA", 0x31, "Bengali"),
    c(0x099E, None, "BENGALI LETTER NYA", 0x31, "Bengali"),
    c(0x099F, None, "BENGALI LETTER TTA", 0x31, "Bengali"),
    c(0x09A0, None, "BENGALI LETTER TTHA", 0x31, "Bengali"),
    c(0x09A1, None, "BENGALI LETTER DDA", 0x31, "Bengali"),
    c(0x09A2, None, "BENGALI LETTER DDHA", 0x31, "Bengali"),
    c(0x09A3, None, "BENGALI LETTER NNA", 0x31, "Bengali"),
    c(0x09A4, None, "BENGALI LETTER TA", 0x31, "Bengali"),
    c(0x09A5, None, "BENGALI LETTER THA", 0x31, "Bengali"),
    c(0x09A6, None, "BENGALI LETTER DA", 0x31, "Bengali"),
    c(0x09A7, None, "BENGALI LETTER DHA", 0x31, "Bengali"),
    c(0x09A8, None, "BENGALI LETTER NA", 0x31, "Bengali"),
    c(0x09AA, None, "BENGALI LETTER PA", 0x31, "Bengali"),
    c(0x09AB, None, "BENGALI LETTER PHA", 0x31, "Bengali"),
    c(0x09AC, None, "BENGALI LETTER BA", 0x31, "Bengali"),
    c(0x09AD, None, "BENGALI LETTER BHA", 0x31, "Bengali"),
    c(0x09AE, None, "BENGALI LETTER MA", 0x31, "Bengali"),
    c(0x09AF, None, "BENGALI LETTER YA", 0x31, "Bengali"),
    c(0x09B0, None, "BENGALI LETTER RA", 0x31, "Bengali"),
    c(0x09B2, None, "BENGALI LETTER LA", 0x31, "Bengali"),
    c(0x09B6, None, "BENGALI LETTER SHA", 0x31, "Bengali"),
    c(0x09B7, None, "BENGALI LETTER SSA", 0x31, "Bengali"),
    c(0x09B8, None, "BENGALI LETTER SA", 0x31, "Bengali"),
    c(0x09B9, None, "BENGALI LETTER HA", 0x31, "Bengali"),
    c(0x09BC, None, "BENGALI SIGN NUKTA", 0x20, "Bengali"),
    c(0x09BD, None, "BENGALI SIGN AVAGRAHA", 0x31, "Bengali"),
    c(0x09BE, None, "BENGALI VOWEL SIGN AA", 0x21, "Bengali"),
    c(0x09BF, None, "BENGALI VOWEL SIGN I", 0x21, "Bengali"),
    c(0x09C0, None, "BENGALI VOWEL SIGN II", 0x21, "Bengali"),
    c(0x09C1, None, "BENGALI VOWEL SIGN U", 0x21, "Bengali"),
    c(0x09C2, None, "BENGALI VOWEL SIGN UU", 0x21, "Bengali"),
    c(0x09C3, None, "BENGALI VOWEL SIGN VOCALIC R", 0x21, "Bengali"),
    c(0x09C4, None, "BENGALI VOWEL SIGN VOCALIC RR", 0x21, "Bengali"),
    c(0x09C7, None, "BENGALI VOWEL SIGN E", 0x21, "Bengali"),
    c(0x09C8, None, "BENGALI VOWEL SIGN AI", 0x21, "Bengali"),
    c(0x09CB, None, "BENGALI VOWEL SIGN O", 0x21, "Bengali"),
    c(0x09CC, None, "BENGALI VOWEL SIGN AU", 0x21, "Bengali"),
    c(0x09CD, None, "BENGALI SIGN VIRAMA", 0x20, "Bengali"),
    c(0x09CE, None, "BENGALI LETTER KHANDA TA", 0x31, "Bengali"),
    c(0x09D7, None, "BENGALI AU LENGTH MARK", 0x21, "Bengali"),
    c(0x09DC, None, "BENGALI LETTER RRA", 0x31, "Bengali"),
    c(0x09DD, None, "BENGALI LETTER RHA", 0x31, "Bengali"),
    c(0x09DF, None, "BENGALI LETTER YYA", 0x31, "Bengali"),
    c(0x09E0, None, "BENGALI LETTER VOCALIC RR", 0x31, "Bengali"),
    c(0x09E1, None, "BENGALI LETTER VOCALIC LL", 0x31, "Bengali"),
    c(0x09E2, None, "BENGALI VOWEL SIGN VOCALIC L", 0x21, "Bengali"),
    c(0x09E3, None, "BENGALI VOWEL SIGN VOCALIC LL", 0x21, "Bengali"),
    c(0x09E6, None, "BENGALI DIGIT ZERO", 0x20, "Bengali"),
    c(0x09E7, None, "BENGALI DIGIT ONE", 0x20, "Bengali"),
    c(0x09E8, None, "BENGALI DIGIT TWO", 0x20, "Bengali"),
    c(0x09E9, None, "BENGALI DIGIT THREE", 0x20, "Bengali"),
    c(0x09EA, None, "BENGALI DIGIT FOUR", 0x20, "Bengali"),
    c(0x09EB, None, "BENGALI DIGIT FIVE", 0x20, "Bengali"),
    c(0x09EC, None, "BENGALI DIGIT SIX", 0x20, "Bengali"),
    c(0x09ED, None, "BENGALI DIGIT SEVEN", 0x20, "Bengali"),
    c(0x09EE, None, "BENGALI DIGIT EIGHT", 0x20, "Bengali"),
    c(0x09EF, None, "BENGALI DIGIT NINE", 0x20, "Bengali"),
    c(0x09F0, None, "BENGALI LETTER RA WITH MIDDLE DIAGONAL", 0x31, "Bengali"),
    c(0x09F1, None, "BENGALI LETTER RA WITH LOWER DIAGONAL", 0x31, "Bengali"),
    c(0x09F2, None, "BENGALI RUPEE MARK", 0x00, "Bengali"),
    c(0x09F3, None, "BENGALI RUPEE SIGN", 0x00, "Bengali"),
    c(0x09F4, None, "BENGALI CURRENCY NUMERATOR ONE", 0x00, "Bengali"),
    c(0x09F5, None, "BENGALI CURRENCY NUMERATOR TWO", 0x00, "Bengali"),
    c(0x09F6, None, "BENGALI CURRENCY NUMERATOR THREE", 0x00, "Bengali"),
    c(0x09F7, None, "BENGALI CURRENCY NUMERATOR FOUR", 0x00, "Bengali"),
    c(0x09F8, None, "BENGALI CURRENCY NUMERATOR ONE LESS THAN THE DENOMINATOR", 0x00, "Bengali"),
    c(0x09F9, None, "BENGALI CURRENCY DENOMINATOR SIXTEEN", 0x00, "Bengali"),
    c(0x09FA, None, "BENGALI ISSHAR", 0x00, "Bengali"),
    c(0x09FB, None, "BENGALI GANDA MARK", 0x00, "Bengali"),
    c(0x09FC, None, "BENGALI LETTER VEDIC ANUSVARA", 0x31, "Bengali"),
    c(0x09FD, None, "BENGALI ABBREVIATION SIGN", 0x00, "Bengali"),
    c(0x09FE, None, "BENGALI SANDHI MARK", 0x20, "Bengali"),
    c(0x0A01, None, "GURMUKHI SIGN ADAK BINDI", 0x21, "Gurmukhi"),
    c(0x0A02, None, "GURMUKHI SIGN BINDI", 0x21, "Gurmukhi"),
    c(0x0A03, None, "GURMUKHI SIGN VISARGA", 0x21, "Gurmukhi"),
    c(0x0A05, None, "GURMUKHI LETTER A", 0x31, "Gurmukhi"),
    c(0x0A06, None, "GURMUKHI LETTER AA", 0x31, "Gurmukhi"),
    c(0x0A07, None, "GURMUKHI LETTER I", 0x31, "Gurmukhi"),
    c(0x0A08, None, "GURMUKHI LETTER II", 0x31, "Gurmukhi"),
    c(0x0A09, None, "GURMUKHI LETTER U", 0x31, "Gurmukhi"),
    c(0x0A0A, None, "GURMUKHI LETTER UU", 0x31, "Gurmukhi"),
    c(0x0A0F, None, "GURMUKHI LETTER EE", 0x31, "Gurmukhi"),
    c(0x0A10, None, "GURMUKHI LETTER AI", 0x31, "Gurmukhi"),
    c(0x0A13, None, "GURMUKHI LETTER OO", 0x31, "Gurmukhi"),
    c(0x0A14, None, "GURMUKHI LETTER AU", 0x31, "Gurmukhi"),
    c(0x0A15, None, "GURMUKHI LETTER KA", 0x31, "Gurmukhi"),
    c(0x0A16, None, "GURMUKHI LETTER KHA", 0x31, "Gurmukhi"),
    c(0x0A17, None, "GURMUKHI LETTER GA", 0x31, "Gurmukhi"),
    c(0x0A18, None, "GURMUKHI LETTER GHA", 0x31, "Gurmukhi"),
    c(0x0A19, None, "GURMUKHI LETTER NGA", 0x31, "Gurmukhi"),
    c(0x0A1A, None, "GURMUKHI LETTER CA", 0x31, "Gurmukhi"),
    c(0x0A1B, None, "GURMUKHI LETTER CHA", 0x31, "Gurmukhi"),
    c(0x0A1C, None, "GURMUKHI LETTER JA", 0x31, "Gurmukhi"),
    c(0x0A1D, None, "GURMUKHI LETTER JHA", 0x31, "Gurmukhi"),
    c(0x0A1E, None, "GURMUKHI LETTER NYA", 0x31, "Gurmukhi"),
    c(0x0A1F, None, "GURMUKHI LETTER TTA", 0x31, "Gurmukhi"),
    c(0x0A20, None, "GURMUKHI LETTER TTHA", 0x31, "Gurmukhi"),
    c(0x0A21, None, "GURMUKHI LETTER DDA", 0x31, "Gurmukhi"),
    c(0x0A22, None, "GURMUKHI LETTER DDHA", 0x31, "Gurmukhi"),
    c(0x0A23, None, "GURMUKHI LETTER NNA", 0x31, "Gurmukhi"),
    c(0x0A24, None, "GURMUKHI LETTER TA", 0x31, "Gurmukhi"),
    c(0x0A25, None, "GURMUKHI LETTER THA", 0x31, "Gurmukhi"),
    c(0x0A26, None, "GURMUKHI LETTER DA", 0x31, "Gurmukhi"),
    c(0x0A27, None, "GURMUKHI LETTER DHA", 0x31, "Gurmukhi"),
    c(0x0A28, None, "GURMUKHI LETTER NA", 0x31, "Gurmukhi"),
    c(0x0A2A, None, "GURMUKHI LETTER PA", 0x31, "Gurmukhi"),
    c(0x0A2B, None, "GURMUKHI LETTER PHA", 0x31, "Gurmukhi"),
    c(0x0A2C, None, "GURMUKHI LETTER BA", 0x31, "Gurmukhi"),
    c(0x0A2D, None, "GURMUKHI LETTER BHA", 0x31, "Gurmukhi"),
    c(0x0A2E, None, "GURMUKHI LETTER MA", 0x31, "Gurmukhi"),
    c(0x0A2F, None, "GURMUKHI LETTER YA", 0x31, "Gurmukhi"),
    c(0x0A30, None, "GURMUKHI LETTER RA", 0x31, "Gurmukhi"),
    c(0x0A32, None, "GURMUKHI LETTER LA", 0x31, "Gurmukhi"),
    c(0x0A33, None, "GURMUKHI LETTER LLA", 0x31, "Gurmukhi"),
    c(0x0A35, None, "GURMUKHI LETTER VA", 0x31, "Gurmukhi"),
    c(0x0A36, None, "GURMUKHI LETTER SHA", 0x31, "Gurmukhi"),
    c(0x0A38, None, "GURMUKHI LETTER SA", 0x31, "Gurmukhi"),
    c(0x0A39, None, "GURMUKHI LETTER HA", 0x31, "Gurmukhi"),
    c(0x0A3C, None, "GURMUKHI SIGN NUKTA", 0x20, "Gurmukhi"),
    c(0x0A3E, None, "GURMUKHI VOWEL SIGN AA", 0x21, "Gurmukhi"),
    c(0x0A3F, None, "GURMUKHI VOWEL SIGN I", 0x21, "Gurmukhi"),
    c(0x0A40, None, "GURMUKHI VOWEL SIGN II", 0x21, "Gurmukhi"),
    c(0x0A41, None, "GURMUKHI VOWEL SIGN U", 0x21, "Gurmukhi"),
    c(0x0A42, None, "GURMUKHI VOWEL SIGN UU", 0x21, "Gurmukhi"),
    c(0x0A47, None, "GURMUKHI VOWEL SIGN EE", 0x21, "Gurmukhi"),
    c(0x0A48, None, "GURMUKHI VOWEL SIGN AI", 0x21, "Gurmukhi"),
    c(0x0A4B, None, "GURMUKHI VOWEL SIGN OO", 0x21, "Gurmukhi"),
    c(0x0A4C, None, "GURMUKHI VOWEL SIGN AU", 0x21, "Gurmukhi"),
    c(0x0A4D, None, "GURMUKHI SIGN VIRAMA", 0x20, "Gurmukhi"),
    c(0x0A51, None, "GURMUKHI SIGN UDAAT", 0x21, "Gurmukhi"),
    c(0x0A59, None, "GURMUKHI LETTER KHHA", 0x31, "Gurmukhi"),
    c(0x0A5A, None, "GURMUKHI LETTER GHHA", 0x31, "Gurmukhi"),
    c(0x0A5B, None, "GURMUKHI LETTER ZA", 0x31, "Gurmukhi"),
    c(0x0A5C, None, "GURMUKHI LETTER RRA", 0x31, "Gurmukhi"),
    c(0x0A5E, None, "GURMUKHI LETTER FA", 0x31, "Gurmukhi"),
    c(0x0A66, None, "GURMUKHI DIGIT ZERO", 0x20, "Gurmukhi"),
    c(0x0A67, None, "GURMUKHI DIGIT ONE", 0x20, "Gurmukhi"),
    c(0x0A68, None, "GURMUKHI DIGIT TWO", 0x20, "Gurmukhi"),
    c(0x0A69, None, "GURMUKHI DIGIT THREE", 0x20, "Gurmukhi"),
    c(0x0A6A, None, "GURMUKHI DIGIT FOUR", 0x20, "Gurmukhi"),
    c(0x0A6B, None, "GURMUKHI DIGIT FIVE", 0x20, "Gurmukhi"),
    c(0x0A6C, None, "GURMUKHI DIGIT SIX", 0x20, "Gurmukhi"),
    c(0x0A6D, None, "GURMUKHI DIGIT SEVEN", 0x20, "Gurmukhi"),
    c(0x0A6E, None, "GURMUKHI DIGIT EIGHT", 0x20, "Gurmukhi"),
    c(0x0A6F, None, "GURMUKHI DIGIT NINE", 0x20, "Gurmukhi"),
    c(0x0A70, None, "GURMUKHI TIPPI", 0x21, "Gurmukhi"),
    c(0x0A71, None, "GURMUKHI ADDAK", 0x21, "Gurmukhi"),
    c(0x0A72, None, "GURMUKHI IRI", 0x31, "Gurmukhi"),
    c(0x0A73, None, "GURMUKHI URA", 0x31, "Gurmukhi"),
    c(0x0A74, None, "GURMUKHI EK ONKAR", 0x31, "Gurmukhi"),
    c(0x0A75, None, "GURMUKHI SIGN YAKASH", 0x21, "Gurmukhi"),
    c(0x0A76, None, "GURMUKHI ABBREVIATION SIGN", 0x00, "Gurmukhi"),
    c(0x0A81, None, "GUJARATI SIGN CANDRABINDU", 0x21, "Gujarati"),
    c(0x0A82, None, "GUJARATI SIGN ANUSVARA", 0x21, "Gujarati"),
    c(0x0A83, None, "GUJARATI SIGN VISARGA", 0x21, "Gujarati"),
    c(0x0A85, None, "GUJARATI LETTER A", 0x31, "Gujarati"),
    c(0x0A86, None, "GUJARATI LETTER AA", 0x31, "Gujarati"),
    c(0x0A87, None, "GUJARATI LETTER I", 0x31, "Gujarati"),
    c(0x0A88, None, "GUJARATI LETTER II", 0x31, "Gujarati"),
    c(0x0A89, None, "GUJARATI LETTER U", 0x31, "Gujarati"),
    c(0x0A8A, None, "GUJARATI LETTER UU", 0x31, "Gujarati"),
    c(0x0A8B, None, "GUJARATI LETTER VOCALIC R", 0x31, "Gujarati"),
    c(0x0A8C, None, "GUJARATI LETTER VOCALIC L", 0x31, "Gujarati"),
    c(0x0A8D, None, "GUJARATI VOWEL CANDRA E", 0x31, "Gujarati"),
    c(0x0A8F, None, "GUJARATI LETTER E", 0x31, "Gujarati"),
    c(0x0A90, None, "GUJARATI LETTER AI", 0x31, "Gujarati"),
    c(0x0A91, None, "GUJARATI VOWEL CANDRA O", 0x31, "Gujarati"),
    c(0x0A93, None, "GUJARATI LETTER O", 0x31, "Gujarati"),
    c(0x0A94, None, "GUJARATI LETTER AU", 0x31, "Gujarati"),
    c(0x0A95, None, "GUJARATI LETTER KA", 0x31, "Gujarati"),
    c(0x0A96, None, "GUJARATI LETTER KHA", 0x31, "Gujarati"),
    c(0x0A97, None, "GUJARATI LETTER GA", 0x31, "Gujarati"),
    c(0x0A98, None, "GUJARATI LETTER GHA", 0x31, "Gujarati"),
    c(0x0A99, None, "GUJARATI LETTER NGA", 0x31, "Gujarati"),
    c(0x0A9A, None, "GUJARATI LETTER CA", 0x31, "Gujarati"),
    c(0x0A9B, None, "GUJARATI LETTER CHA", 0x31, "Gujarati"),
    c(0x0A9C, None, "GUJARATI LETTER JA", 0x31, "Gujarati"),
    c(0x0A9D, None, "GUJARATI LETTER JHA", 0x31, "Gujarati"),
    c(0x0A9E, None, "GUJARATI LETTER NYA", 0x31, "Gujarati"),
    c(0x0A9F, None, "GUJARATI LETTER TTA", 0x31, "Gujarati"),
    c(0x0AA0, None, "GUJARATI LETTER TTHA", 0x31, "Gujarati"),
    c(0x0AA1, None, "GUJARATI LETTER DDA", 0x31, "Gujarati"),
    c(0x0AA2, None, "GUJARATI LETTER DDHA", 0x31, "Gujarati"),
    c(0x0AA3, None, "GUJARATI LETTER NNA", 0x31, "Gujarati"),
    c(0x0AA4, None, "GUJARATI LETTER TA", 0x31, "Gujarati"),
    c(0x0AA5, None, "GUJARATI LETTER THA", 0x31, "Gujarati"),
    c(0x0AA6, None, "GUJARATI LETTER DA", 0x31, "Gujarati"),
    c(0x0AA7, None, "GUJARATI LETTER DHA", 0x31, "Gujarati"),
    c(0x0AA8, None, "GUJARATI LETTER NA", 0x31, "Gujarati"),
    c(0x0AAA, None, "GUJARATI LETTER PA", 0x31, "Gujarati"),
    c(0x0AAB, None, "GUJARATI LETTER PHA", 0x31, "Gujarati"),
    c(0x0AAC, None, "GUJARATI LETTER BA", 0x31, "Gujarati"),
    c(0x0AAD, None, "GUJARATI LETTER BHA", 0x31, "Gujarati"),
    c(0x0AAE, None, "GUJARATI LETTER MA", 0x31, "Gujarati"),
    c(0x0AAF, None, "GUJARATI LETTER YA", 0x31, "Gujarati"),
    c(0x0AB0, None, "GUJARATI LETTER RA", 0x31, "Gujarati"),
    c(0x0AB2, None, "GUJARATI LETTER LA", 0x31, "Gujarati"),
    c(0x0AB3, None, "GUJARATI LETTER LLA", 0x31, "Gujarati"),
    c(0x0AB5, None, "GUJARATI LETTER VA", 0x31, "Gujarati"),
    c(0x0AB6, None, "GUJARATI LETTER SHA", 0x31, "Gujarati"),
    c(0x0AB7, None, "GUJARATI LETTER SSA", 0x31, "Gujarati"),
    c(0x0AB8, None, "GUJARATI LETTER SA", 0x31, "Gujarati"),
    c(0x0AB9, None, "GUJARATI LETTER HA", 0x31, "Gujarati"),
    c(0x0ABC, None, "GUJARATI SIGN NUKTA", 0x20, "Gujarati"),
    c(0x0ABD, None, "GUJARATI SIGN AVAGRAHA", 0x31, "Gujarati"),
    c(0x0ABE, None, "GUJARATI VOWEL SIGN AA", 0x21, "Gujarati"),
    c(0x0ABF, None, "GUJARATI VOWEL SIGN I", 0x21, "Gujarati"),
    c(0x0AC0, None, "GUJARATI VOWEL SIGN II", 0x21, "Gujarati"),
    c(0x0AC1, None, "GUJARATI VOWEL SIGN U", 0x21, "Gujarati"),
    c(0x0AC2, None, "GUJARATI VOWEL SIGN UU", 0x21, "Gujarati"),
    c(0x0AC3, None, "GUJARATI VOWEL SIGN VOCALIC R", 0x21, "Gujarati"),
    c(0x0AC4, None, "GUJARATI VOWEL SIGN VOCALIC RR", 0x21, "Gujarati"),
    c(0x0AC5, None, "GUJARATI VOWEL SIGN CANDRA E", 0x21, "Gujarati"),
    c(0x0AC7, None, "GUJARATI VOWEL SIGN E", 0x21, "Gujarati"),
    c(0x0AC8, None, "GUJARATI VOWEL SIGN AI", 0x21, "Gujarati"),
    c(0x0AC9, None, "GUJARATI VOWEL SIGN CANDRA O", 0x21, "Gujarati"),
    c(0x0ACB, None, "GUJARATI VOWEL SIGN O", 0x21, "Gujarati"),
    c(0x0ACC, None, "GUJARATI VOWEL SIGN AU", 0x21, "Gujarati"),
    c(0x0ACD, None, "GUJARATI SIGN VIRAMA", 0x20, "Gujarati"),
    c(0x0AD0, None, "GUJARATI OM", 0x31, "Gujarati"),
    c(0x0AE0, None, "GUJARATI LETTER VOCALIC RR", 0x31, "Gujarati"),
    c(0x0AE1, None, "GUJARATI LETTER VOCALIC LL", 0x31, "Gujarati"),
    c(0x0AE2, None, "GUJARATI VOWEL SIGN VOCALIC L", 0x21, "Gujarati"),
    c(0x0AE3, None, "GUJARATI VOWEL SIGN VOCALIC LL", 0x21, "Gujarati"),
    c(0x0AE6, None, "GUJARATI DIGIT ZERO", 0x20, "Gujarati"),
    c(0x0AE7, None, "GUJARATI DIGIT ONE", 0x20, "Gujarati"),
    c(0x0AE8, None, "GUJARATI DIGIT TWO", 0x20, "Gujarati"),
    c(0x0AE9, None, "GUJARATI DIGIT THREE", 0x20, "Gujarati"),
    c(0x0AEA, None, "GUJARATI DIGIT FOUR", 0x20, "Gujarati"),
    c(0x0AEB, None, "GUJARATI DIGIT FIVE", 0x20, "Gujarati"),
    c(0x0AEC, None, "GUJARATI DIGIT SIX", 0x20, "Gujarati"),
    c(0x0AED, None, "GUJARATI DIGIT SEVEN", 0x20, "Gujarati"),
    c(0x0AEE, None, "GUJARATI DIGIT EIGHT", 0x20, "Gujarati"),
    c(0x0AEF, None, "GUJARATI DIGIT NINE", 0x20, "Gujarati"),
    c(0x0AF0, None, "GUJARATI ABBREVIATION SIGN", 0x00, "Gujarati"),
    c(0x0AF1, None, "GUJARATI RUPEE SIGN", 0x00, "Gujarati"),
    c(0x0AF9, None, "GUJARATI LETTER ZHA", 0x31, "Gujarati"),
    c(0x0AFA, None, "GUJARATI SIGN SUKUN", 0x21, "Gujarati"),
    c(0x0AFB, None, "GUJARATI SIGN SHADDA", 0x21, "Gujarati"),
    c(0x0AFC, None, "GUJARATI SIGN MADDAH", 0x21, "Gujarati"),
    c(0x0AFD, None, "GUJARATI SIGN THREE-DOT NUKTA ABOVE", 0x20, "Gujarati"),
    c(0x0AFE, None, "GUJARATI SIGN CIRCLE NUKTA ABOVE", 0x20, "Gujarati"),
    c(0x0AFF, None, "GUJARATI SIGN TWO-CIRCLE NUKTA ABOVE", 0x20, "Gujarati"),
    c(0x0B01, None, "ORIYA SIGN CANDRABINDU", 0x21, "Oriya"),
    c(0x0B02, None, "ORIYA SIGN ANUSVARA", 0x21, "Oriya"),
    c(0x0B03, None, "ORIYA SIGN VISARGA", 0x21, "Oriya"),
    c(0x0B05, None, "ORIYA LETTER A", 0x31, "Oriya"),
    c(0x0B06, None, "ORIYA LETTER AA", 0x31, "Oriya"),
    c(0x0B07, None, "ORIYA LETTER I", 0x31, "Oriya"),
    c(0x0B08, None, "ORIYA LETTER II", 0x31, "Oriya"),
    c(0x0B09, None, "ORIYA LETTER U", 0x31, "Oriya"),
    c(0x0B0A, None, "ORIYA LETTER UU", 0x31, "Oriya"),
    c(0x0B0B, None, "ORIYA LETTER VOCALIC R", 0x31, "Oriya"),
    c(0x0B0C, None, "ORIYA LETTER VOCALIC L", 0x31, "Oriya"),
    c(0x0B0F, None, "ORIYA LETTER E", 0x31, "Oriya"),
    c(0x0B10, None, "ORIYA LETTER AI", 0x31, "Oriya"),
    c(0x0B13, None, "ORIYA LETTER O", 0x31, "Oriya"),
    c(0x0B14, None, "ORIYA LETTER AU", 0x31, "Oriya"),
    c(0x0B15, None, "ORIYA LETTER KA", 0x31, "Oriya"),
    c(0x0B16, None, "ORIYA LETTER KHA", 0x31, "Oriya"),
    c(0x0B17, None, "ORIYA LETTER GA", 0x31, "Oriya"),
    c(0x0B18, None, "ORIYA LETTER GHA", 0x31, "Oriya"),
    c(0x0B19, None, "ORIYA LETTER NGA", 0x31, "Oriya"),
    c(0x0B1A, None, "ORIYA LETTER CA", 0x31, "Oriya"),
    c(0x0B1B, None, "ORIYA LETTER CHA", 0x31, "Oriya"),
    c(0x0B1C, None, "ORIYA LETTER JA", 0x31, "Oriya"),
    c(0x0B1D, None, "ORIYA LETTER JHA", 0x31, "Oriya"),
    c(0x0B1E, None, "ORIYA LETTER NYA", 0x31, "Oriya"),
    c(0x0B1F, None, "ORIYA LETTER TTA", 0x31, "Oriya"),
    c(0x0B20, None, "ORIYA LETTER TTHA", 0x31, "Oriya"),
    c(0x0B21, None, "ORIYA LETTER DDA", 0x31, "Oriya"),
    c(0x0B22, None, "ORIYA LETTER DDHA", 0x31, "Oriya"),
    c(0x0B23, None, "ORIYA LETTER NNA", 0x31, "Oriya"),
    c(0x0B24, None, "ORIYA LETTER TA", 0x31, "Oriya"),
    c(0x0B25, None, "ORIYA LETTER THA", 0x31, "Oriya"),
    c(0x0B26, None, "ORIYA LETTER DA", 0x31, "Oriya"),
    c(0x0B27, None, "ORIYA LETTER DHA", 0x31, "Oriya"),
    c(0x0B28, None, "ORIYA LETTER NA", 0x31, "Oriya"),
    c(0x0B2A, None, "ORIYA LETTER PA", 0x31, "Oriya"),
    c(0x0B2B, None, "ORIYA LETTER PHA", 0x31, "Oriya"),
    c(0x0B2C, None, "ORIYA LETTER BA", 0x31, "Oriya"),
    c(0x0B2D, None, "ORIYA LETTER BHA", 0x31, "Oriya"),
    c(0x0B2E, None, "ORIYA LETTER MA", 0x31, "Oriya"),
    c(0x0B2F, None, "ORIYA LETTER YA", 0x31, "Oriya"),
    c(0x0B30, None, "ORIYA LETTER RA", 0x31, "Oriya"),
    c(0x0B32, None, "ORIYA LETTER LA", 0x31, "Oriya"),
    c(0x0B33, None, "ORIYA LETTER LLA", 0x31, "Oriya"),
    c(0x0B35, None, "ORIYA LETTER VA", 0x31, "Oriya"),
    c(0x0B36, None, "ORIYA LETTER SHA", 0x31, "Oriya"),
    c(0x0B37, None, "ORIYA LETTER SSA", 0x31, "Oriya"),
    c(0x0B38, None, "ORIYA LETTER SA", 0x31, "Oriya"),
    c(0x0B39, None, "ORIYA LETTER HA", 0x31, "Oriya"),
    c(0x0B3C, None, "ORIYA SIGN NUKTA", 0x20, "Oriya"),
    c(0x0B3D, None, "ORIYA SIGN AVAGRAHA", 0x31, "Oriya"),
    c(0x0B3E, None, "ORIYA VOWEL SIGN AA", 0x21, "Oriya"),
    c(0x0B3F, None, "ORIYA VOWEL SIGN I", 0x21, "Oriya"),
    c(0x0B40, None, "ORIYA VOWEL SIGN II", 0x21, "Oriya"),
    c(0x0B41, None, "ORIYA VOWEL SIGN U", 0x21, "Oriya"),
    c(0x0B42, None, "ORIYA VOWEL SIGN UU", 0x21, "Oriya"),
    c(0x0B43, None, "ORIYA VOWEL SIGN VOCALIC R", 0x21, "Oriya"),
    c(0x0B44, None, "ORIYA VOWEL SIGN VOCALIC RR", 0x21, "Oriya"),
    c(0x0B47, None, "ORIYA VOWEL SIGN E", 0x21, "Oriya"),
    c(0x0B48, None, "ORIYA VOWEL SIGN AI", 0x21, "Oriya"),
    c(0x0B4B, None, "ORIYA VOWEL SIGN O", 0x21, "Oriya"),
    c(0x0B4C, None, "ORIYA VOWEL SIGN AU", 0x21, "Oriya"),
    c(0x0B4D, None, "ORIYA SIGN VIRAMA", 0x20, "Oriya"),
    c(0x0B55, None, "ORIYA SIGN OVERLINE", 0x20, "Oriya"),
    c(0x0B56, None, "ORIYA AI LENGTH MARK", 0x21, "Oriya"),
    c(0x0B57, None, "ORIYA AU LENGTH MARK", 0x21, "Oriya"),
    c(0x0B5C, None, "ORIYA LETTER RRA", 0x31, "Oriya"),
    c(0x0B5D, None, "ORIYA LETTER RHA", 0x31, "Oriya"),
    c(0x0B5F, None, "ORIYA LETTER YYA", 0x31, "Oriya"),
    c(0x0B60, None, "ORIYA LETTER VOCALIC RR", 0x31, "Oriya"),
    c(0x0B61, None, "ORIYA LETTER VOCALIC LL", 0x31, "Oriya"),
    c(0x0B62, None, "ORIYA VOWEL SIGN VOCALIC L", 0x21, "Oriya"),
    c(0x0B63, None, "ORIYA VOWEL SIGN VOCALIC LL", 0x21, "Oriya"),
    c(0x0B66, None, "ORIYA DIGIT ZERO", 0x20, "Oriya"),
    c(0x0B67, None, "ORIYA DIGIT ONE", 0x20, "Oriya"),
    c(0x0B68, None, "ORIYA DIGIT TWO", 0x20, "Oriya"),
    c(0x0B69, None, "ORIYA DIGIT THREE", 0x20, "Oriya"),
    c(0x0B6A, None, "ORIYA DIGIT FOUR", 0x20, "Oriya"),
    c(0x0B6B, None, "ORIYA DIGIT FIVE", 0x20, "Oriya"),
    c(0x0B6C, None, "ORIYA DIGIT SIX", 0x20, "Oriya"),
    c(0x0B6D, None, "ORIYA DIGIT SEVEN", 0x20, "Oriya"),
    c(0x0B6E, None, "ORIYA DIGIT EIGHT", 0x20, "Oriya"),
    c(0x0B6F, None, "ORIYA DIGIT NINE", 0x20, "Oriya"),
    c(0x0B70, None, "ORIYA ISSHAR", 0x00, "Oriya"),
    c(0x0B71, None, "ORIYA LETTER WA", 0x31, "Oriya"),
    c(0x0B72, None, "ORIYA FRACTION ONE QUARTER", 0x00, "Oriya"),
    c(0x0B73, None, "ORIYA FRACTION ONE HALF", 0x00, "Oriya"),
    c(0x0B74, None, "ORIYA FRACTION THREE QUARTERS", 0x00, "Oriya"),
    c(0x0B75, None, "ORIYA FRACTION ONE SIXTEENTH", 0x00, "Oriya"),
    c(0x0B76, None, "ORIYA FRACTION ONE EIGHTH", 0x00, "Oriya"),
    c(0x0B77, None, "ORIYA FRACTION THREE SIXTEENTHS", 0x00, "Oriya"),
    c(0x0B82, None, "TAMIL SIGN ANUSVARA", 0x21, "Tamil"),
    c(0x0B83, None, "TAMIL SIGN VISARGA", 0x31, "Tamil"),
    c(0x0B85, None, "TAMIL LETTER A", 0x31, "Tamil"),
    c(0x0B86, None, "TAMIL LETTER AA", 0x31, "Tamil"),
    c(0x0B87, None, "TAMIL LETTER I", 0x31, "Tamil"),
    c(0x0B88, None, "TAMIL LETTER II", 0x31, "Tamil"),
    c(0x0B89, None, "TAMIL LETTER U", 0x31, "Tamil"),
    c(0x0B8A, None, "TAMIL LETTER UU", 0x31, "Tamil"),
    c(0x0B8E, None, "TAMIL LETTER E", 0x31, "Tamil"),
    c(0x0B8F, None, "TAMIL LETTER EE", 0x31, "Tamil"),
    c(0x0B90, None, "TAMIL LETTER AI", 0x31, "Tamil"),
    c(0x0B92, None, "TAMIL LETTER O", 0x31, "Tamil"),
    c(0x0B93, None, "TAMIL LETTER OO", 0x31, "Tamil"),
    c(0x0B94, None, "TAMIL LETTER AU", 0x31, "Tamil"),
    c(0x0B95, None, "TAMIL LETTER KA", 0x31, "Tamil"),
    c(0x0B99, None, "TAMIL LETTER NGA", 0x31, "Tamil"),
    c(0x0B9A, None, "TAMIL LETTER CA", 0x31, "Tamil"),
    c(0x0B9C, None, "TAMIL LETTER JA", 0x31, "Tamil"),
    c(0x0B9E, None, "TAMIL LETTER NYA", 0x31, "Tamil"),
    c(0x0B9F, None, "TAMIL LETTER TTA", 0x31, "Tamil"),
    c(0x0BA3, None, "TAMIL LETTER NNA", 0x31, "Tamil"),
    c(0x0BA4, None, "TAMIL LETTER TA", 0x31, "Tamil"),
    c(0x0BA8, None, "TAMIL LETTER NA", 0x31, "Tamil"),
    c(0x0BA9, None, "TAMIL LETTER NNNA", 0x31, "Tamil"),
    c(0x0BAA, None, "TAMIL LETTER PA", 0x31, "Tamil"),
    c(0x0BAE, None, "TAMIL LETTER MA", 0x31, "Tamil"),
    c(0x0BAF, None, "TAMIL LETTER YA", 0x31, "Tamil"),
    c(0x0BB0, None, "TAMIL LETTER RA", 0x31, "Tamil"),
    c(0x0BB1, None, "TAMIL LETTER RRA", 0x31, "Tamil"),
    c(0x0BB2, None, "TAMIL LETTER LA", 0x31, "Tamil"),
    c(0x0BB3, None, "TAMIL LETTER LLA", 0x31, "Tamil"),
    c(0x0BB4, None, "TAMIL LETTER LLLA", 0x31, "Tamil"),
    c(0x0BB5, None, "TAMIL LETTER VA", 0x31, "Tamil"),
    c(0x0BB6, None, "TAMIL LETTER SHA", 0x31, "Tamil"),
    c(0x0BB7, None, "TAMIL LETTER SSA", 0x31, "Tamil"),
    c(0x0BB8, None, "TAMIL LETTER SA", 0x31, "Tamil"),
    c(0x0BB9, None, "TAMIL LETTER HA", 0x31, "Tamil"),
    c(0x0BBE, None, "TAMIL VOWEL SIGN AA", 0x21, "Tamil"),
    c(0x0BBF, None, "TAMIL VOWEL SIGN I", 0x21, "Tamil"),
    c(0x0BC0, None, "TAMIL VOWEL SIGN II", 0x21, "Tamil"),
    c(0x0BC1, None, "TAMIL VOWEL SIGN U", 0x21, "Tamil"),
    c(0x0BC2, None, "TAMIL VOWEL SIGN UU", 0x21, "Tamil"),
    c(0x0BC6, None, "TAMIL VOWEL SIGN E", 0x21, "Tamil"),
    c(0x0BC7, None, "TAMIL VOWEL SIGN EE", 0x21, "Tamil"),
    c(0x0BC8, None, "TAMIL VOWEL SIGN AI", 0x21, "Tamil"),
    c(0x0BCA, None, "TAMIL VOWEL SIGN O", 0x21, "Tamil"),
    c(0x0BCB, None, "TAMIL VOWEL SIGN OO", 0x21, "Tamil"),
    c(0x0BCC, None, "TAMIL VOWEL SIGN AU", 0x21, "Tamil"),
    c(0x0BCD, None, "TAMIL SIGN VIRAMA", 0x20, "Tamil"),
    c(0x0BD0, None, "TAMIL OM", 0x31, "Tamil"),
    c(0x0BD7, None, "TAMIL AU LENGTH MARK", 0x21, "Tamil"),
    c(0x0BE6, None, "TAMIL DIGIT ZERO", 0x20, "Tamil"),
    c(0x0BE7, None, "TAMIL DIGIT ONE", 0x20, "Tamil"),
    c(0x0BE8, None, "TAMIL DIGIT TWO", 0x20, "Tamil"),
    c(0x0BE9, None, "TAMIL DIGIT THREE", 0x20, "Tamil"),
    c(0x0BEA, None, "TAMIL DIGIT FOUR", 0x20, "Tamil"),
    c(0x0BEB, None, "TAMIL DIGIT FIVE", 0x20, "Tamil"),
    c(0x0BEC, None, "TAMIL DIGIT SIX", 0x20, "Tamil"),
    c(0x0BED, None, "TAMIL DIGIT SEVEN", 0x20, "Tamil"),
    c(0x0BEE, None, "TAMIL DIGIT EIGHT", 0x20, "Tamil"),
    c(0x0BEF, None, "TAMIL DIGIT NINE", 0x20, "Tamil"),
    c(0x0BF0, None, "TAMIL NUMBER TEN", 0x00, "Tamil"),
    c(0x0BF1, None, "TAMIL NUMBER ONE HUNDRED", 0x00, "Tamil"),
    c(0x0BF2, None, "TAMIL NUMBER ONE THOUSAND", 0x00, "Tamil"),
    c(0x0BF3, None, "TAMIL DAY SIGN", 0x00, "Tamil"),
    c(0x0BF4, None, "TAMIL MONTH SIGN", 0x00, "Tamil"),
    c(0x0BF5, None, "TAMIL YEAR SIGN", 0x00, "Tamil"),
    c(0x0BF6, None, "TAMIL DEBIT SIGN", 0x00, "Tamil"),
    c(0x0BF7, None, "TAMIL CREDIT SIGN", 0x00, "Tamil"),
    c(0x0BF8, None, "TAMIL AS ABOVE SIGN", 0x00, "Tamil"),
    c(0x0BF9, None, "TAMIL RUPEE SIGN", 0x00, "Tamil"),
    c(0x0BFA, None, "TAMIL NUMBER SIGN", 0x00, "Tamil"),
    c(0x0C00, None, "TELUGU SIGN COMBINING CANDRABINDU ABOVE", 0x21, "Telugu"),
    c(0x0C01, None, "TELUGU SIGN CANDRABINDU", 0x21, "Telugu"),
    c(0x0C02, None, "TELUGU SIGN ANUSVARA", 0x21, "Telugu"),
    c(0x0C03, None, "TELUGU SIGN VISARGA", 0x21, "Telugu"),
    c(0x0C04, None, "TELUGU SIGN COMBINING ANUSVARA ABOVE", 0x20, "Telugu"),
    c(0x0C05, None, "TELUGU LETTER A", 0x31, "Telugu"),
    c(0x0C06, None, "TELUGU LETTER AA", 0x31, "Telugu"),
    c(0x0C07, None, "TELUGU LETTER I", 0x31, "Telugu"),
    c(0x0C08, None, "TELUGU LETTER II", 0x31, "Telugu"),
    c(0x0C09, None, "TELUGU LETTER U", 0x31, "Telugu"),
    c(0x0C0A, None, "TELUGU LETTER UU", 0x31, "Telugu"),
    c(0x0C0B, None, "TELUGU LETTER VOCALIC R", 0x31, "Telugu"),
    c(0x0C0C, None, "TELUGU LETTER VOCALIC L", 0x31, "Telugu"),
    c(0x0C0E, None, "TELUGU LETTER E", 0x31, "Telugu"),
    c(0x0C0F, None, "TELUGU LETTER EE", 0x31, "Telugu"),
    c(0x0C10, None, "TELUGU LETTER AI", 0x31, "Telugu"),
    c(0x0C12, None, "TELUGU LETTER O", 0x31, "Telugu"),
    c(0x0C13, None, "TELUGU LETTER OO", 0x31, "Telugu"),
    c(0x0C14, None, "TELUGU LETTER AU", 0x31, "Telugu"),
    c(0x0C15, None, "TELUGU LETTER KA", 0x31, "Telugu"),
    c(0x0C16, None, "TELUGU LETTER KHA", 0x31, "Telugu"),
    c(0x0C17, None, "TELUGU LETTER GA", 0x31, "Telugu"),
    c(0x0C18, None, "TELUGU LETTER GHA", 0x31, "Telugu"),
    c(0x0C19, None, "TELUGU LETTER NGA", 0x31, "Telugu"),
    c(0x0C1A, None, "TELUGU LETTER CA", 0x31, "Telugu"),
    c(0x0C1B, None, "TELUGU LETTER CHA", 0x31, "Telugu"),
    c(0x0C1C, None, "TELUGU LETTER JA", 0x31, "Telugu"),
    c(0x0C1D, None, "TELUGU LETTER JHA", 0x31, "Telugu"),
    c(0x0C1E, None, "TELUGU LETTER NYA", 0x31, "Telugu"),
    c(0x0C1F, None, "TELUGU LETTER TTA", 0x31, "Telugu"),
    c(0x0C20, None, "TELUGU LETTER TTHA", 0x31, "Telugu"),
    c(0x0C21, None, "TELUGU LETTER DDA", 0x31, "Telugu"),
    c(0x0C22, None, "TELUGU LETTER DDHA", 0x31, "Telugu"),
    c(0x0C23, None, "TELUGU LETTER NNA", 0x31, "Telugu"),
    c(0x0C24, None, "TELUGU LETTER TA", 0x31, "Telugu"),
    c(0x0C25, None, "TELUGU LETTER THA", 0x31, "Telugu"),
    c(0x0C26, None, "TELUGU LETTER DA", 0x31, "Telugu"),
    c(0x0C27, None, "TELUGU LETTER DHA", 0x31, "Telugu"),
    c(0x0C28, None, "TELUGU LETTER NA", 0x31, "Telugu"),
    c(0x0C2A, None, "TELUGU LETTER PA", 0x31, "Telugu"),
    c(0x0C2B, None, "TELUGU LETTER PHA", 0x31, "Telugu"),
    c(0x0C2C, None, "TELUGU LETTER BA", 0x31, "Telugu"),
    c(0x0C2D, None, "TELUGU LETTER BHA", 0x31, "Telugu"),
    c(0x0C2E, None, "TELUGU LETTER MA", 0x31, "Telugu"),
    c(0x0C2F, None, "TELUGU LETTER YA", 0x31, "Telugu"),
    c(0x0C30, None, "TELUGU LETTER RA", 0x31, "Telugu"),
    c(0x0C31, None, "TELUGU LETTER RRA", 0x31, "Telugu"),
    c(0x0C32, None, "TELUGU LETTER LA", 0x31, "Telugu"),
    c(0x0C33, None, "TELUGU LETTER LLA", 0x31, "Telugu"),
    c(0x0C34, None, "TELUGU LETTER LLLA", 0x31, "Telugu"),
    c(0x0C35, None, "TELUGU LETTER VA", 0x31, "Telugu"),
    c(0x0C36, None, "TELUGU LETTER SHA", 0x31, "Telugu"),
    c(0x0C37, None, "TELUGU LETTER SSA", 0x31, "Telugu"),
    c(0x0C38, None, "TELUGU LETTER SA", 0x31, "Telugu"),
    c(0x0C39, None, "TELUGU LETTER HA", 0x31, "Telugu"),
    c(0x0C3C, None, "TELUGU SIGN NUKTA", 0x20, "Telugu"),
    c(0x0C3D, None, "TELUGU SIGN AVAGRAHA", 0x31, "Telugu"),
    c(0x0C3E, None, "TELUGU VOWEL SIGN AA", 0x21, "Telugu"),
    c(0x0C3F, None, "TELUGU VOWEL SIGN I", 0x21, "Telugu"),
    c(0x0C40, None, "TELUGU VOWEL SIGN II", 0x21, "Telugu"),
    c(0x0C41, None, "TELUGU VOWEL SIGN U", 0x21, "Telugu"),
    c(0x0C42, None, "TELUGU VOWEL SIGN UU", 0x21, "Telugu"),
    c(0x0C43, None, "TELUGU VOWEL SIGN VOCALIC R", 0x21, "Telugu"),
    c(0x0C44, None, "TELUGU VOWEL SIGN VOCALIC RR", 0x21, "Telugu"),
    c(0x0C46, None, "TELUGU VOWEL SIGN E", 0x21, "Telugu"),
    c(0x0C47, None, "TELUGU VOWEL SIGN EE", 0x21, "Telugu"),
    c(0x0C48, None, "TELUGU VOWEL SIGN AI", 0x21, "Telugu"),
    c(0x0C4A, None, "TELUGU VOWEL SIGN O", 0x21, "Telugu"),
    c(0x0C4B, None, "TELUGU VOWEL SIGN OO", 0x21, "Telugu"),
    c(0x0C4C, None, "TELUGU VOWEL SIGN AU", 0x21, "Telugu"),
    c(0x0C4D, None, "TELUGU SIGN VIRAMA", 0x20, "Telugu"),
    c(0x0C55, None, "TELUGU LENGTH MARK", 0x21, "Telugu"),
    c(0x0C56, None, "TELUGU AI LENGTH MARK", 0x21, "Telugu"),
    c(0x0C58, None, "TELUGU LETTER TSA", 0x31, "Telugu"),
    c(0x0C59, None, "TELUGU LETTER DZA", 0x31, "Telugu"),
    c(0x0C5A, None, "TELUGU LETTER RRRA", 0x31, "Telugu"),
    c(0x0C5D, None, "TELUGU LETTER NAKAARA POLLU", 0x31, "Telugu"),
    c(0x0C60, None, "TELUGU LETTER VOCALIC RR", 0x31, "Telugu"),
    c(0x0C61, None, "TELUGU LETTER VOCALIC LL", 0x31, "Telugu"),
    c(0x0C62, None, "TELUGU VOWEL SIGN VOCALIC L", 0x21, "Telugu"),
    c(0x0C63, None, "TELUGU VOWEL SIGN VOCALIC LL", 0x21, "Telugu"),
    c(0x0C66, None, "TELUGU DIGIT ZERO", 0x20, "Telugu"),
    c(0x0C67, None, "TELUGU DIGIT ONE", 0x20, "Telugu"),
    c(0x0C68, None, "TELUGU DIGIT TWO", 0x20, "Telugu"),
    c(0x0C69, None, "TELUGU DIGIT THREE", 0x20, "Telugu"),
    c(0x0C6A, None, "TELUGU DIGIT FOUR", 0x20, "Telugu"),
    c(0x0C6B, None, "TELUGU DIGIT FIVE", 0x20, "Telugu"),
    c(0x0C6C, None, "TELUGU DIGIT SIX", 0x20, "Telugu"),
    c(0x0C6D, None, "TELUGU DIGIT SEVEN", 0x20, "Telugu"),
    c(0x0C6E, None, "TELUGU DIGIT EIGHT", 0x20, "Telugu"),
    c(0x0C6F, None, "TELUGU DIGIT NINE", 0x20, "Telugu"),
    c(0x0C77, None, "TELUGU SIGN SIDDHAM", 0x00, "Telugu"),
    c(0x0C78, None, "TELUGU FRACTION DIGIT ZERO FOR ODD POWERS OF FOUR", 0x00, "Telugu"),
    c(0x0C79, None, "TELUGU FRACTION DIGIT ONE FOR ODD POWERS OF FOUR", 0x00, "Telugu"),
    c(0x0C7A, None, "TELUGU FRACTION DIGIT TWO FOR ODD POWERS OF FOUR", 0x00, "Telugu"),
    c(0x0C7B, None, "TELUGU FRACTION DIGIT THREE FOR ODD POWERS OF FOUR", 0x00, "Telugu"),
    c(0x0C7C, None, "TELUGU FRACTION DIGIT ONE FOR EVEN POWERS OF FOUR", 0x00, "Telugu"),
    c(0x0C7D, None, "TELUGU FRACTION DIGIT TWO FOR EVEN POWERS OF FOUR", 0x00, "Telugu"),
    c(0x0C7E, None, "TELUGU FRACTION DIGIT THREE FOR EVEN POWERS OF FOUR", 0x00, "Telugu"),
    c(0x0C7F, None, "TELUGU SIGN TUUMU", 0x00, "Telugu"),
    c(0x0C80, None, "KANNADA SIGN SPACING CANDRABINDU", 0x31, "Kannada"),
    c(0x0C81, None, "KANNADA SIGN CANDRABINDU", 0x21, "Kannada"),
    c(0x0C82, None, "KANNADA SIGN ANUSVARA", 0x21, "Kannada"),
    c(0x0C83, None, "KANNADA SIGN VISARGA", 0x21, "Kannada"),
    c(0x0C84, None, "KANNADA SIGN SIDDHAM", 0x00, "Kannada"),
    c(0x0C85, None, "KANNADA LETTER A", 0x31, "Kannada"),
    c(0x0C86, None, "KANNADA LETTER AA", 0x31, "Kannada"),
    c(0x0C87, None, "KANNADA LETTER I", 0x31, "Kannada"),
    c(0x0C88, None, "KANNADA LETTER II", 0x31, "Kannada"),
    c(0x0C89, None, "KANNADA LETTER U", 0x31, "Kannada"),
    c(0x0C8A, None, "KANNADA LETTER UU", 0x31, "Kannada"),
    c(0x0C8B, None, "KANNADA LETTER VOCALIC R", 0x31, "Kannada"),
    c(0x0C8C, None, "KANNADA LETTER VOCALIC L", 0x31, "Kannada"),
    c(0x0C8E, None, "KANNADA LETTER E", 0x31, "Kannada"),
    c(0x0C8F, None, "KANNADA LETTER EE", 0x31, "Kannada"),
    c(0x0C90, None, "KANNADA LETTER AI", 0x31, "Kannada"),
    c(0x0C92, None, "KANNADA LETTER O", 0x31, "Kannada"),
    c(0x0C93, None, "KANNADA LETTER OO", 0x31, "Kannada"),
    c(0x0C94, None, "KANNADA LETTER AU", 0x31, "Kannada"),
    c(0x0C95, None, "KANNADA LETTER KA", 0x31, "Kannada"),
    c(0x0C96, None, "KANNADA LETTER KHA", 0x31, "Kannada"),
    c(0x0C97, None, "KANNADA LETTER GA", 0x31, "Kannada"),
    c(0x0C98, None, "KANNADA LETTER GHA", 0x31, "Kannada"),
    c(0x0C99, None, "KANNADA LETTER NGA", 0x31, "Kannada"),
    c(0x0C9A, None, "KANNADA LETTER CA", 0x31, "Kannada"),
    c(0x0C9B, None, "KANNADA LETTER CHA", 0x31, "Kannada"),
    c(0x0C9C, None, "KANNADA LETTER JA", 0x31, "Kannada"),
    c(0x0C9D, None, "KANNADA LETTER JHA", 0x31, "Kannada"),
    c(0x0C9E, None, "KANNADA LETTER NYA", 0x31, "Kannada"),
    c(0x0C9F, None, "KANNADA LETTER TTA", 0x31, "Kannada"),
    c(0x0CA0, None, "KANNADA LETTER TTHA", 0x31, "Kannada"),
    c(0x0CA1, None, "KANNADA LETTER DDA", 0x31, "Kannada"),
    c(0x0CA2, None, "KANNADA LETTER DDHA", 0x31, "Kannada"),
    c(0x0CA3, None, "KANNADA LETTER NNA", 0x31, "Kannada"),
    c(0x0CA4, None, "KANNADA LETTER TA", 0x31, "Kannada"),
    c(0x0CA5, None, "KANNADA LETTER THA", 0x31, "Kannada"),
    c(0x0CA6, None, "KANNADA LETTER DA", 0x31, "Kannada"),
    c(0x0CA7, None, "KANNADA LETTER DHA", 0x31, "Kannada"),
    c(0x0CA8, None, "KANNADA LETTER NA", 0x31, "Kannada"),
    c(0x0CAA, None, "KANNADA LETTER PA", 0x31, "Kannada"),
    c(0x0CAB, None, "KANNADA LETTER PHA", 0x31, "Kannada"),
    c(0x0CAC, None, "KANNADA LETTER BA", 0x31, "Kannada"),
    c(0x0CAD, None, "KANNADA LETTER BHA", 0x31, "Kannada"),
    c(0x0CAE, None, "KANNADA LETTER MA", 0x31, "Kannada"),
    c(0x0CAF, None, "KANNADA LETTER YA", 0x31, "Kannada"),
    c(0x0CB0, None, "KANNADA LETTER RA", 0x31, "Kannada"),
    c(0x0CB1, None, "KANNADA LETTER RRA", 0x31, "Kannada"),
    c(0x0CB2, None, "KANNADA LETTER LA", 0x31, "Kannada"),
    c(0x0CB3, None, "KANNADA LETTER LLA", 0x31, "Kannada"),
    c(0x0CB5, None, "KANNADA LETTER VA", 0x31, "Kannada"),
    c(0x0CB6, None, "KANNADA LETTER SHA", 0x31, "Kannada"),
    c(0x0CB7, None, "KANNADA LETTER SSA", 0x31, "Kannada"),
    c(0x0CB8, None, "KANNADA LETTER SA", 0x31, "Kannada"),
    c(0x0CB9, None, "KANNADA LETTER HA", 0x31, "Kannada"),
    c(0x0CBC, None, "KANNADA SIGN NUKTA", 0x20, "Kannada"),
    c(0x0CBD, None, "KANNADA SIGN AVAGRAHA", 0x31, "Kannada"),
    c(0x0CBE, None, "KANNADA VOWEL SIGN AA", 0x21, "Kannada"),
    c(0x0CBF, None, "KANNADA VOWEL SIGN I", 0x21, "Kannada"),
    c(0x0CC0, None, "KANNADA VOWEL SIGN II", 0x21, "Kannada"),
    c(0x0CC1, None, "KANNADA VOWEL SIGN U", 0x21, "Kannada"),
    c(0x0CC2, None, "KANNADA VOWEL SIGN UU", 0x21, "Kannada"),
    c(0x0CC3, None, "KANNADA VOWEL SIGN VOCALIC R", 0x21, "Kannada"),
    c(0x0CC4, None, "KANNADA VOWEL SIGN VOCALIC RR", 0x21, "Kannada"),
    c(0x0CC6, None, "KANNADA VOWEL SIGN E", 0x21, "Kannada"),
    c(0x0CC7, None, "KANNADA VOWEL SIGN EE", 0x21, "Kannada"),
    c(0x0CC8, None, "KANNADA VOWEL SIGN AI", 0x21, "Kannada"),
    c(0x0CCA, None, "KANNADA VOWEL SIGN O", 0x21, "Kannada"),
    c(0x0CCB, None, "KANNADA VOWEL SIGN OO", 0x21, "Kannada"),
    c(0x0CCC, None, "KANNADA VOWEL SIGN AU", 0x21, "Kannada"),
    c(0x0CCD, None, "KANNADA SIGN VIRAMA", 0x20, "Kannada"),
    c(0x0CD5, None, "KANNADA LENGTH MARK", 0x21, "Kannada"),
    c(0x0CD6, None, "KANNADA AI LENGTH MARK", 0x21, "Kannada"),
    c(0x0CDD, None, "KANNADA LETTER NAKAARA POLLU", 0x31, "Kannada"),
    c(0x0CDE, None, "KANNADA LETTER LLLA", 0x31, "Kannada"),
    c(0x0CE0, None, "KANNADA LETTER VOCALIC RR", 0x31, "Kannada"),
    c(0x0CE1, None, "KANNADA LETTER VOCALIC LL", 0x31, "Kannada"),
    c(0x0CE2, None, "KANNADA VOWEL SIGN VOCALIC L", 0x21, "Kannada"),
    c(0x0CE3, None, "KANNADA VOWEL SIGN VOCALIC LL", 0x21, "Kannada"),
    c(0x0CE6, None, "KANNADA DIGIT ZERO", 0x20, "Kannada"),
    c(0x0CE7, None, "KANNADA DIGIT ONE", 0x20, "Kannada"),
    c(0x0CE8, None, "KANNADA DIGIT TWO", 0x20, "Kannada"),
    c(0x0CE9, None, "KANNADA DIGIT THREE", 0x20, "Kannada"),
    c(0x0CEA, None, "KANNADA DIGIT FOUR", 0x20, "Kannada"),
    c(0x0CEB, None, "KANNADA DIGIT FIVE", 0x20, "Kannada"),
    c(0x0CEC, None, "KANNADA DIGIT SIX", 0x20, "Kannada"),
    c(0x0CED, None, "KANNADA DIGIT SEVEN", 0x20, "Kannada"),
    c(0x0CEE, None, "KANNADA DIGIT EIGHT", 0x20, "Kannada"),
    c(0x0CEF, None, "KANNADA DIGIT NINE", 0x20, "Kannada"),
    c(0x0CF1, None, "KANNADA SIGN JIHVAMULIYA", 0x31, "Kannada"),
    c(0x0CF2, None, "KANNADA SIGN UPADHMANIYA", 0x31, "Kannada"),
    c(0x0D00, None, "MALAYALAM SIGN COMBINING ANUSVARA ABOVE", 0x21, "Malayalam"),
    c(0x0D01, None, "MALAYALAM SIGN CANDRABINDU", 0x21, "Malayalam"),
    c(0x0D02, None, "MALAYALAM SIGN ANUSVARA", 0x21, "Malayalam"),
    c(0x0D03, None, "MALAYALAM SIGN VISARGA", 0x21, "Malayalam"),
    c(0x0D04, None, "MALAYALAM LETTER VEDIC ANUSVARA", 0x31, "Malayalam"),
    c(0x0D05, None, "MALAYALAM LETTER A", 0x31, "Malayalam"),
    c(0x0D06, None, "MALAYALAM LETTER AA", 0x31, "Malayalam"),
    c(0x0D07, None, "MALAYALAM LETTER I", 0x31, "Malayalam"),
    c(0x0D08, None, "MALAYALAM LETTER II", 0x31, "Malayalam"),
    c(0x0D09, None, "MALAYALAM LETTER U", 0x31, "Malayalam"),
    c(0x0D0A, None, "MALAYALAM LETTER UU", 0x31, "Malayalam"),
    c(0x0D0B, None, "MALAYALAM LETTER VOCALIC R", 0x31, "Malayalam"),
    c(0x0D0C, None, "MALAYALAM LETTER VOCALIC L", 0x31, "Malayalam"),
    c(0x0D0E, None, "MALAYALAM LETTER E", 0x31, "Malayalam"),
    c(0x0D0F, None, "MALAYALAM LETTER EE", 0x31, "Malayalam"),
    c(0x0D10, None, "MALAYALAM LETTER AI", 0x31, "Malayalam"),
    c(0x0D12, None, "MALAYALAM LETTER O", 0x31, "Malayalam"),
    c(0x0D13, None, "MALAYALAM LETTER OO", 0x31, "Malayalam"),
    c(0x0D14, None, "MALAYALAM LETTER AU", 0x31, "Malayalam"),
    c(0x0D15, None, "MALAYALAM LETTER KA", 0x31, "Malayalam"),
    c(0x0D16, None, "MALAYALAM LETTER KHA", 0x31, "Malayalam"),
    c(0x0D17, None, "MALAYALAM LETTER GA", 0x31, "Malayalam"),
    c(0x0D18, None, "MALAYALAM LETTER GHA", 0x31, "Malayalam"),
    c(0x0D19, None, "MALAYALAM LETTER NGA", 0x31, "Malayalam"),
    c(0x0D1A, None, "MALAYALAM LETTER CA", 0x31, "Malayalam"),
    c(0x0D1B, None, "MALAYALAM LETTER CHA", 0x31, "Malayalam"),
    c(0x0D1C, None, "MALAYALAM LETTER JA", 0x31, "Malayalam"),
    c(0x0D1D, None, "MALAYALAM LETTER JHA", 0x31, "Malayalam"),
    c(0x0D1E, None, "MALAYALAM LETTER NYA", 0x31, "Malayalam"),
    c(0x0D1F, None, "MALAYALAM LETTER TTA", 0x31, "Malayalam"),
    c(0x0D20, None, "MALAYALAM LETTER TTHA", 0x31, "Malayalam"),
    c(0x0D21, None, "MALAYALAM LETTER DDA", 0x31, "Malayalam"),
    c(0x0D22, None, "MALAYALAM LETTER DDHA", 0x31, "Malayalam"),
    c(0x0D23, None, "MALAYALAM LETTER NNA", 0x31, "Malayalam"),
    c(0x0D24, None, "MALAYALAM LETTER TA", 0x31, "Malayalam"),
    c(0x0D25, None, "MALAYALAM LETTER THA", 0x31, "Malayalam"),
    c(0x0D26, None, "MALAYALAM LETTER DA", 0x31, "Malayalam"),
    c(0x0D27, None, "MALAYALAM LETTER DHA", 0x31, "Malayalam"),
    c(0x0D28, None, "MALAYALAM LETTER NA", 0x31, "Malayalam"),
    c(0x0D29, None, "MALAYALAM LETTER NNNA", 0x31, "Malayalam"),
    c(0x0D2A, None, "MALAYALAM LETTER PA", 0x31, "Malayalam"),
    c(0x0D2B, None, "MALAYALAM LETTER PHA", 0x31, "Malayalam"),
    c(0x0D2C, None, "MALAYALAM LETTER BA", 0x31, "Malayalam"),
    c(0x0D2D, None, "MALAYALAM LETTER BHA", 0x31, "Malayalam"),
    c(0x0D2E, None, "MALAYALAM LETTER MA", 0x31, "Malayalam"),
    c(0x0D2F, None, "MALAYALAM LETTER YA", 0x31, "Malayalam"),
    c(0x0D30, None, "MALAYALAM LETTER RA", 0x31, "Malayalam"),
    c(0x0D31, None, "MALAYALAM LETTER RRA", 0x31, "Malayalam"),
    c(0x0D32, None, "MALAYALAM LETTER LA", 0x31, "Malayalam"),
    c(0x0D33, None, "MALAYALAM LETTER LLA", 0x31, "Malayalam"),
    c(0x0D34, None, "MALAYALAM LETTER LLLA", 0x31, "Malayalam"),
    c(0x0D35, None, "MALAYALAM LETTER VA", 0x31, "Malayalam"),
    c(0x0D36, None, "MALAYALAM LETTER SHA", 0x31, "Malayalam"),
    c(0x0D37, None, "MALAYALAM LETTER SSA", 0x31, "Malayalam"),
    c(0x0D38, None, "MALAYALAM LETTER SA", 0x31, "Malayalam"),
    c(0x0D39, None, "MALAYALAM LETTER HA", 0x31, "Malayalam"),
    c(0x0D3A, None, "MALAYALAM LETTER TTTA", 0x31, "Malayalam"),
    c(0x0D3B, None, "MALAYALAM SIGN VERTICAL BAR VIRAMA", 0x20, "Malayalam"),
    c(0x0D3C, None, "MALAYALAM SIGN CIRCULAR VIRAMA", 0x20, "Malayalam"),
    c(0x0D3D, None, "MALAYALAM SIGN AVAGRAHA", 0x31, "Malayalam"),
    c(0x0D3E, None, "MALAYALAM VOWEL SIGN AA", 0x21, "Malayalam"),
    c(0x0D3F, None, "MALAYALAM VOWEL SIGN I", 0x21, "Malayalam"),
    c(0x0D40, None, "MALAYALAM VOWEL SIGN II", 0x21, "Malayalam"),
    c(0x0D41, None, "MALAYALAM VOWEL SIGN U", 0x21, "Malayalam"),
    c(0x0D42, None, "MALAYALAM VOWEL SIGN UU", 0x21, "Malayalam"),
    c(0x0D43, None, "MALAYALAM VOWEL SIGN VOCALIC R", 0x21, "Malayalam"),
    c(0x0D44, None, "MALAYALAM VOWEL SIGN VOCALIC RR", 0x21, "Malayalam"),
    c(0x0D46, None, "MALAYALAM VOWEL SIGN E", 0x21, "Malayalam"),
    c(0x0D47, None, "MALAYALAM VOWEL SIGN EE", 0x21, "Malayalam"),
    c(0x0D48, None, "MALAYALAM VOWEL SIGN AI", 0x21, "Malayalam"),
    c(0x0D4A, None, "MALAYALAM VOWEL SIGN O", 0x21, "Malayalam"),
    c(0x0D4B, None, "MALAYALAM VOWEL SIGN OO", 0x21, "Malayalam"),
    c(0x0D4C, None, "MALAYALAM VOWEL SIGN AU", 0x21, "Malayalam"),
    c(0x0D4D, None, "MALAYALAM SIGN VIRAMA", 0x20, "Malayalam"),
    c(0x0D4E, None, "MALAYALAM LETTER DOT REPH", 0x31, "Malayalam"),
    c(0x0D4F, None, "MALAYALAM SIGN PARA", 0x00, "Malayalam"),
    c(0x0D54, None, "MALAYALAM LETTER CHILLU M", 0x31, "Malayalam"),
    c(0x0D55, None, "MALAYALAM LETTER CHILLU Y", 0x31, "Malayalam"),
    c(0x0D56, None, "MALAYALAM LETTER CHILLU LLL", 0x31, "Malayalam"),
    c(0x0D57, None, "MALAYALAM AU LENGTH MARK", 0x21, "Malayalam"),
    c(0x0D58, None, "MALAYALAM FRACTION ONE ONE-HUNDRED-AND-SIXTIETH", 0x00, "Malayalam"),
    c(0x0D59, None, "MALAYALAM FRACTION ONE FORTIETH", 0x00, "Malayalam"),
    c(0x0D5A, None, "MALAYALAM FRACTION THREE EIGHTIETHS", 0x00, "Malayalam"),
    c(0x0D5B, None, "MALAYALAM FRACTION ONE TWENTIETH", 0x00, "Malayalam"),
    c(0x0D5C, None, "MALAYALAM FRACTION ONE TENTH", 0x00, "Malayalam"),
    c(0x0D5D, None, "MALAYALAM FRACTION THREE TWENTIETHS", 0x00, "Malayalam"),
    c(0x0D5E, None, "MALAYALAM FRACTION ONE FIFTH", 0x00, "Malayalam"),
    c(0x0D5F, None, "MALAYALAM LETTER ARCHAIC II", 0x31, "Malayalam"),
    c(0x0D60, None, "MALAYALAM LETTER VOCALIC RR", 0x31, "Malayalam"),
    c(0x0D61, None, "MALAYALAM LETTER VOCALIC LL", 0x31, "Malayalam"),
    c(0x0D62, None, "MALAYALAM VOWEL SIGN VOCALIC L", 0x21, "Malayalam"),
    c(0x0D63, None, "MALAYALAM VOWEL SIGN VOCALIC LL", 0x21, "Malayalam"),
    c(0x0D66, None, "MALAYALAM DIGIT ZERO", 0x20, "Malayalam"),
    c(0x0D67, None, "MALAYALAM DIGIT ONE", 0x20, "Malayalam"),
    c(0x0D68, None, "MALAYALAM DIGIT TWO", 0x20, "Malayalam"),
    c(0x0D69, None, "MALAYALAM DIGIT THREE", 0x20, "Malayalam"),
    c(0x0D6A, None, "MALAYALAM DIGIT FOUR", 0x20, "Malayalam"),
    c(0x0D6B, None, "MALAYALAM DIGIT FIVE", 0x20, "Malayalam"),
    c(0x0D6C, None, "MALAYALAM DIGIT SIX", 0x20, "Malayalam"),
    c(0x0D6D, None, "MALAYALAM DIGIT SEVEN", 0x20, "Malayalam"),
    c(0x0D6E, None, "MALAYALAM DIGIT EIGHT", 0x20, "Malayalam"),
    c(0x0D6F, None, "MALAYALAM DIGIT NINE", 0x20, "Malayalam"),
    c(0x0D70, None, "MALAYALAM NUMBER TEN", 0x00, "Malayalam"),
    c(0x0D71, None, "MALAYALAM NUMBER ONE HUNDRED", 0x00, "Malayalam"),
    c(0x0D72, None, "MALAYALAM NUMBER ONE THOUSAND", 0x00, "Malayalam"),
    c(0x0D73, None, "MALAYALAM FRACTION ONE QUARTER", 0x00, "Malayalam"),
    c(0x0D74, None, "MALAYALAM FRACTION ONE HALF", 0x00, "Malayalam"),
    c(0x0D75, None, "MALAYALAM FRACTION THREE QUARTERS", 0x00, "Malayalam"),
    c(0x0D76, None, "MALAYALAM FRACTION ONE SIXTEENTH", 0x00, "Malayalam"),
    c(0x0D77, None, "MALAYALAM FRACTION ONE EIGHTH", 0x00, "Malayalam"),
    c(0x0D78, None, "MALAYALAM FRACTION THREE SIXTEENTHS", 0x00, "Malayalam"),
    c(0x0D79, None, "MALAYALAM DATE MARK", 0x00, "Malayalam"),
    c(0x0D7A, None, "MALAYALAM LETTER CHILLU NN", 0x31, "Malayalam"),
    c(0x0D7B, None, "MALAYALAM LETTER CHILLU N", 0x31, "Malayalam"),
    c(0x0D7C, None, "MALAYALAM LETTER CHILLU RR", 0x31, "Malayalam"),
    c(0x0D7D, None, "MALAYALAM LETTER CHILLU L", 0x31, "Malayalam"),
    c(0x0D7E, None, "MALAYALAM LETTER CHILLU LL", 0x31, "Malayalam"),
    c(0x0D7F, None, "MALAYALAM LETTER CHILLU K", 0x31, "Malayalam"),
    c(0x0D81, None, "SINHALA SIGN CANDRABINDU", 0x21, "Sinhala"),
    c(0x0D82, None, "SINHALA SIGN ANUSVARAYA", 0x21, "Sinhala"),
    c(0x0D83, None, "SINHALA SIGN VISARGAYA", 0x21, "Sinhala"),
    c(0x0D85, None, "SINHALA LETTER AYANNA", 0x31, "Sinhala"),
    c(0x0D86, None, "SINHALA LETTER AAYANNA", 0x31, "Sinhala"),
    c(0x0D87, None, "SINHALA LETTER AEYANNA", 0x31, "Sinhala"),
    c(0x0D88, None, "SINHALA LETTER AEEYANNA", 0x31, "Sinhala"),
    c(0x0D89, None, "SINHALA LETTER IYANNA", 0x31, "Sinhala"),
    c(0x0D8A, None, "SINHALA LETTER IIYANNA", 0x31, "Sinhala"),
    c(0x0D8B, None, "SINHALA LETTER UYANNA", 0x31, "Sinhala"),
    c(0x0D8C, None, "SINHALA LETTER UUYANNA", 0x31, "Sinhala"),
    c(0x0D8D, None, "SINHALA LETTER IRUYANNA", 0x31, "Sinhala"),
    c(0x0D8E, None, "SINHALA LETTER IRUUYANNA", 0x31, "Sinhala"),
    c(0x0D8F, None, "SINHALA LETTER ILUYANNA", 0x31, "Sinhala"),
    c(0x0D90, None, "SINHALA LETTER ILUUYANNA", 0x31, "Sinhala"),
    c(0x0D91, None, "SINHALA LETTER EYANNA", 0x31, "Sinhala"),
    c(0x0D92, None, "SINHALA LETTER EEYANNA", 0x31, "Sinhala"),
    c(0x0D93, None, "SINHALA LETTER AIYANNA", 0x31, "Sinhala"),
    c(0x0D94, None, "SINHALA LETTER OYANNA", 0x31, "Sinhala"),
    c(0x0D95, None, "SINHALA LETTER OOYANNA", 0x31, "Sinhala"),
    c(0x0D96, None, "SINHALA LETTER AUYANNA", 0x31, "Sinhala"),
    c(0x0D9A, None, "SINHALA LETTER ALPAPRAANA KAYANNA", 0x31, "Sinhala"),
    c(0x0D9B, None, "SINHALA LETTER MAHAAPRAANA KAYANNA", 0x31, "Sinhala"),
    c(0x0D9C, None, "SINHALA LETTER ALPAPRAANA GAYANNA", 0x31, "Sinhala"),
    c(0x0D9D, None, "SINHALA LETTER MAHAAPRAANA GAYANNA", 0x31, "Sinhala"),
    c(0x0D9E, None, "SINHALA LETTER KANTAJA NAASIKYAYA", 0x31, "Sinhala"),
    c(0x0D9F, None, "SINHALA LETTER SANYAKA GAYANNA", 0x31, "Sinhala"),
    c(0x0DA0, None, "SINHALA LETTER ALPAPRAANA CAYANNA", 0x31, "Sinhala"),
    c(0x0DA1, None, "SINHALA LETTER MAHAAPRAANA CAYANNA", 0x31, "Sinhala"),
    c(0x0DA2, None, "SINHALA LETTER ALPAPRAANA JAYANNA", 0x31, "Sinhala"),
    c(0x0DA3, None, "SINHALA LETTER MAHAAPRAANA JAYANNA", 0x31, "Sinhala"),
    c(0x0DA4, None, "SINHALA LETTER TAALUJA NAASIKYAYA", 0x31, "Sinhala"),
    c(0x0DA5, None, "SINHALA LETTER TAALUJA SANYOOGA NAAKSIKYAYA", 0x31, "Sinhala"),
    c(0x0DA6, None, "SINHALA LETTER SANYAKA JAYANNA", 0x31, "Sinhala"),
    c(0x0DA7, None, "SINHALA LETTER ALPAPRAANA TTAYANNA", 0x31, "Sinhala"),
    c(0x0DA8, None, "SINHALA LETTER MAHAAPRAANA TTAYANNA", 0x31, "Sinhala"),
    c(0x0DA9, None, "SINHALA LETTER ALPAPRAANA DDAYANNA", 0x31, "Sinhala"),
    c(0x0DAA, None, "SINHALA LETTER MAHAAPRAANA DDAYANNA", 0x31, "Sinhala"),
    c(0x0DAB, None, "SINHALA LETTER MUURDHAJA NAYANNA", 0x31, "Sinhala"),
    c(0x0DAC, None, "SINHALA LETTER SANYAKA DDAYANNA", 0x31, "Sinhala"),
    c(0x0DAD, None, "SINHALA LETTER ALPAPRAANA TAYANNA", 0x31, "Sinhala"),
    c(0x0DAE, None, "SINHALA LETTER MAHAAPRAANA TAYANNA", 0x31, "Sinhala"),
    c(0x0DAF, None, "SINHALA LETTER ALPAPRAANA DAYANNA", 0x31, "Sinhala"),
    c(0x0DB0, None, "SINHALA LETTER MAHAAPRAANA DAYANNA", 0x31, "Sinhala"),
    c(0x0DB1, None, "SINHALA LETTER DANTAJA NAYANNA", 0x31, "Sinhala"),
    c(0x0DB3, None, "SINHALA LETTER SANYAKA DAYANNA", 0x31, "Sinhala"),
    c(0x0DB4, None, "SINHALA LETTER ALPAPRAANA PAYANNA", 0x31, "Sinhala"),
    c(0x0DB5, None, "SINHALA LETTER MAHAAPRAANA PAYANNA", 0x31, "Sinhala"),
    c(0x0DB6, None, "SINHALA LETTER ALPAPRAANA BAYANNA", 0x31, "Sinhala"),
    c(0x0DB7, None, "SINHALA LETTER MAHAAPRAANA BAYANNA", 0x31, "Sinhala"),
    c(0x0DB8, None, "SINHALA LETTER MAYANNA", 0x31, "Sinhala"),
    c(0x0DB9, None, "SINHALA LETTER AMBA BAYANNA", 0x31, "Sinhala"),
    c(0x0DBA, None, "SINHALA LETTER YAYANNA", 0x31, "Sinhala"),
    c(0x0DBB, None, "SINHALA LETTER RAYANNA", 0x31, "Sinhala"),
    c(0x0DBD, None, "SINHALA LETTER DANTAJA LAYANNA", 0x31, "Sinhala"),
    c(0x0DC0, None, "SINHALA LETTER VAYANNA", 0x31, "Sinhala"),
    c(0x0DC1, None, "SINHALA LETTER TAALUJA SAYANNA", 0x31, "Sinhala"),
    c(0x0DC2, None, "SINHALA LETTER MUURDHAJA SAYANNA", 0x31, "Sinhala"),
    c(0x0DC3, None, "SINHALA LETTER DANTAJA SAYANNA", 0x31, "Sinhala"),
    c(0x0DC4, None, "SINHALA LETTER HAYANNA", 0x31, "Sinhala"),
    c(0x0DC5, None, "SINHALA LETTER MUURDHAJA LAYANNA", 0x31, "Sinhala"),
    c(0x0DC6, None, "SINHALA LETTER FAYANNA", 0x31, "Sinhala"),
    c(0x0DCA, None, "SINHALA SIGN AL-LAKUNA", 0x20, "Sinhala"),
    c(0x0DCF, None, "SINHALA VOWEL SIGN AELA-PILLA", 0x21, "Sinhala"),
    c(0x0DD0, None, "SINHALA VOWEL SIGN KETTI AEDA-PILLA", 0x21, "Sinhala"),
    c(0x0DD1, None, "SINHALA VOWEL SIGN DIGA AEDA-PILLA", 0x21, "Sinhala"),
    c(0x0DD2, None, "SINHALA VOWEL SIGN KETTI IS-PILLA", 0x21, "Sinhala"),
    c(0x0DD3, None, "SINHALA VOWEL SIGN DIGA IS-PILLA", 0x21, "Sinhala"),
    c(0x0DD4, None, "SINHALA VOWEL SIGN KETTI PAA-PILLA", 0x21, "Sinhala"),
    c(0x0DD6, None, "SINHALA VOWEL SIGN DIGA PAA-PILLA", 0x21, "Sinhala"),
    c(0x0DD8, None, "SINHALA VOWEL SIGN GAETTA-PILLA", 0x21, "Sinhala"),
    c(0x0DD9, None, "SINHALA VOWEL SIGN KOMBUVA", 0x21, "Sinhala"),
    c(0x0DDA, None, "SINHALA VOWEL SIGN DIGA KOMBUVA", 0x21, "Sinhala"),
    c(0x0DDB, None, "SINHALA VOWEL SIGN KOMBU DEKA", 0x21, "Sinhala"),
    c(0x0DDC, None, "SINHALA VOWEL SIGN KOMBUVA HAA AELA-PILLA", 0x21, "Sinhala"),
    c(0x0DDD, None, "SINHALA VOWEL SIGN KOMBUVA HAA DIGA AELA-PILLA", 0x21, "Sinhala"),
    c(0x0DDE, None, "SINHALA VOWEL SIGN KOMBUVA HAA GAYANUKITTA", 0x21, "Sinhala"),
    c(0x0DDF, None, "SINHALA VOWEL SIGN GAYANUKITTA", 0x21, "Sinhala"),
    c(0x0DE6, None, "SINHALA LITH DIGIT ZERO", 0x20, "Sinhala"),
    c(0x0DE7, None, "SINHALA LITH DIGIT ONE", 0x20, "Sinhala"),
    c(0x0DE8, None, "SINHALA LITH DIGIT TWO", 0x20, "Sinhala"),
    c(0x0DE9, None, "SINHALA LITH DIGIT THREE", 0x20, "Sinhala"),
    c(0x0DEA, None, "SINHALA LITH DIGIT FOUR", 0x20, "Sinhala"),
    c(0x0DEB, None, "SINHALA LITH DIGIT FIVE", 0x20, "Sinhala"),
    c(0x0DEC, None, "SINHALA LITH DIGIT SIX", 0x20, "Sinhala"),
    c(0x0DED, None, "SINHALA LITH DIGIT SEVEN", 0x20, "Sinhala"),
    c(0x0DEE, None, "SINHALA LITH DIGIT EIGHT", 0x20, "Sinhala"),
    c(0x0DEF, None, "SINHALA LITH DIGIT NINE", 0x20, "Sinhala"),
    c(0x0DF2, None, "SINHALA VOWEL SIGN DIGA GAETTA-PILLA", 0x21, "Sinhala"),
    c(0x0DF3, None, "SINHALA VOWEL SIGN DIGA GAYANUKITTA", 0x21, "Sinhala"),
    c(0x0DF4, None, "SINHALA PUNCTUATION KUNDDALIYA", 0x00, "Sinhala"),
    c(0x0E01, None, "THAI CHARACTER KO KAI", 0x31, "Thai"),
    c(0x0E02, None, "THAI CHARACTER KHO KHAI", 0x31, "Thai"),
    c(0x0E03, None, "THAI CHARACTER KHO KHUAT", 0x31, "Thai"),
    c(0x0E04, None, "THAI CHARACTER KHO KHWAI", 0x31, "Thai"),
    c(0x0E05, None, "THAI CHARACTER KHO KHON", 0x31, "Thai"),
    c(0x0E06, None, "THAI CHARACTER KHO RAKHANG", 0x31, "Thai"),
    c(0x0E07, None, "THAI CHARACTER NGO NGU", 0x31, "Thai"),
    c(0x0E08, None, "THAI CHARACTER CHO CHAN", 0x31, "Thai"),
    c(0x0E09, None, "THAI CHARACTER CHO CHING", 0x31, "Thai"),
    c(0x0E0A, None, "THAI CHARACTER CHO CHANG", 0x31, "Thai"),
    c(0x0E0B, None, "THAI CHARACTER SO SO", 0x31, "Thai"),
    c(0x0E0C, None, "THAI CHARACTER CHO CHOE", 0x31, "Thai"),
    c(0x0E0D, None, "THAI CHARACTER YO YING", 0x31, "Thai"),
    c(0x0E0E, None, "THAI CHARACTER DO CHADA", 0x31, "Thai"),
    c(0x0E0F, None, "THAI CHARACTER TO PATAK", 0x31, "Thai"),
    c(0x0E10, None, "THAI CHARACTER THO THAN", 0x31, "Thai"),
    c(0x0E11, None, "THAI CHARACTER THO NANGMONTHO", 0x31, "Thai"),
    c(0x0E12, None, "THAI CHARACTER THO PHUTHAO", 0x31, "Thai"),
    c(0x0E13, None, "THAI CHARACTER NO NEN", 0x31, "Thai"),
    c(0x0E14, None, "THAI CHARACTER DO DEK", 0x31, "Thai"),
    c(0x0E15, None, "THAI CHARACTER TO TAO", 0x31, "Thai"),
    c(0x0E16, None, "THAI CHARACTER THO THUNG", 0x31, "Thai"),
    c(0x0E17, None, "THAI CHARACTER THO THAHAN", 0x31, "Thai"),
    c(0x0E18, None, "THAI CHARACTER THO THONG", 0x31, "Thai"),
    c(0x0E19, None, "THAI CHARACTER NO NU", 0x31, "Thai"),
    c(0x0E1A, None, "THAI CHARACTER BO BAIMAI", 0x31, "Thai"),
    c(0x0E1B, None, "THAI CHARACTER PO PLA", 0x31, "Thai"),
    c(0x0E1C, None, "THAI CHARACTER PHO PHUNG", 0x31, "Thai"),
    c(0x0E1D, None, "THAI CHARACTER FO FA", 0x31, "Thai"),
    c(0x0E1E, None, "THAI CHARACTER PHO PHAN", 0x31, "Thai"),
    c(0x0E1F, None, "THAI CHARACTER FO FAN", 0x31, "Thai"),
    c(0x0E20, None, "THAI CHARACTER PHO SAMPHAO", 0x31, "Thai"),
    c(0x0E21, None, "THAI CHARACTER MO MA", 0x31, "Thai"),
    c(0x0E22, None, "THAI CHARACTER YO YAK", 0x31, "Thai"),
    c(0x0E23, None, "THAI CHARACTER RO RUA", 0x31, "Thai"),
    c(0x0E24, None, "THAI CHARACTER RU", 0x31, "Thai"),
    c(0x0E25, None, "THAI CHARACTER LO LING", 0x31, "Thai"),
    c(0x0E26, None, "THAI CHARACTER LU", 0x31, "Thai"),
    c(0x0E27, None, "THAI CHARACTER WO WAEN", 0x31, "Thai"),
    c(0x0E28, None, "THAI CHARACTER SO SALA", 0x31, "Thai"),
    c(0x0E29, None, "THAI CHARACTER SO RUSI", 0x31, "Thai"),
    c(0x0E2A, None, "THAI CHARACTER SO SUA", 0x31, "Thai"),
    c(0x0E2B, None, "THAI CHARACTER HO HIP", 0x31, "Thai"),
    c(0x0E2C, None, "THAI CHARACTER LO CHULA", 0x31, "Thai"),
    c(0x0E2D, None, "THAI CHARACTER O ANG", 0x31, "Thai"),
    c(0x0E2E, None, "THAI CHARACTER HO NOKHUK", 0x31, "Thai"),
    c(0x0E2F, None, "THAI CHARACTER PAIYANNOI", 0x31, "Thai"),
    c(0x0E30, None, "THAI CHARACTER SARA A", 0x31, "Thai"),
    c(0x0E31, None, "THAI CHARACTER MAI HAN-AKAT", 0x21, "Thai"),
    c(0x0E32, None, "THAI CHARACTER SARA AA", 0x31, "Thai"),
    c(0x0E33, None, "THAI CHARACTER SARA AM", 0x21, "Thai"),
    c(0x0E34, None, "THAI CHARACTER SARA I", 0x21, "Thai"),
    c(0x0E35, None, "THAI CHARACTER SARA II", 0x21, "Thai"),
    c(0x0E36, None, "THAI CHARACTER SARA UE", 0x21, "Thai"),
    c(0x0E37, None, "THAI CHARACTER SARA UEE", 0x21, "Thai"),
    c(0x0E38, None, "THAI CHARACTER SARA U", 0x21, "Thai"),
    c(0x0E39, None, "THAI CHARACTER SARA UU", 0x21, "Thai"),
    c(0x0E3A, None, "THAI CHARACTER PHINTHU", 0x21, "Thai"),
    c(0x0E3F, None, "THAI CURRENCY SYMBOL BAHT", 0x00, "Thai"),
    c(0x0E40, None, "THAI CHARACTER SARA E", 0x31, "Thai"),
    c(0x0E41, None, "THAI CHARACTER SARA AE", 0x31, "Thai"),
    c(0x0E42, None, "THAI CHARACTER SARA O", 0x31, "Thai"),
    c(0x0E43, None, "THAI CHARACTER SARA AI MAIMUAN", 0x31, "Thai"),
    c(0x0E44, None, "THAI CHARACTER SARA AI MAIMALAI", 0x31, "Thai"),
    c(0x0E45, None, "THAI CHARACTER LAKKHANGYAO", 0x31, "Thai"),
    c(0x0E46, None, "THAI CHARACTER MAIYAMOK", 0x31, "Thai"),
    c(0x0E47, None, "THAI CHARACTER MAITAIKHU", 0x20, "Thai"),
    c(0x0E48, None, "THAI CHARACTER MAI EK", 0x20, "Thai"),
    c(0x0E49, None, "THAI CHARACTER MAI THO", 0x20, "Thai"),
    c(0x0E4A, None, "THAI CHARACTER MAI TRI", 0x20, "Thai"),
    c(0x0E4B, None, "THAI CHARACTER MAI CHATTAWA", 0x20, "Thai"),
    c(0x0E4C, None, "THAI CHARACTER THANTHAKHAT", 0x20, "Thai"),
    c(0x0E4D, None, "THAI CHARACTER NIKHAHIT", 0x21, "Thai"),
    c(0x0E4E, None, "THAI CHARACTER YAMAKKAN", 0x20, "Thai"),
    c(0x0E4F, None, "THAI CHARACTER FONGMAN", 0x00, "Thai"),
    c(0x0E50, None, "THAI DIGIT ZERO", 0x20, "Thai"),
    c(0x0E51, None, "THAI DIGIT ONE", 0x20, "Thai"),
    c(0x0E52, None, "THAI DIGIT TWO", 0x20, "Thai"),
    c(0x0E53, None, "THAI DIGIT THREE", 0x20, "Thai"),
    c(0x0E54, None, "THAI DIGIT FOUR", 0x20, "Thai"),
    c(0x0E55, None, "THAI DIGIT FIVE", 0x20, "Thai"),
    c(0x0E56, None, "THAI DIGIT SIX", 0x20, "Thai"),
    c(0x0E57, None, "THAI DIGIT SEVEN", 0x20, "Thai"),
    c(0x0E58, None, "THAI DIGIT EIGHT", 0x20, "Thai"),
    c(0x0E59, None, "THAI DIGIT NINE", 0x20, "Thai"),
    c(0x0E5A, None, "THAI CHARACTER ANGKHANKHU", 0x00, "Thai"),
    c(0x0E5B, None, "THAI CHARACTER KHOMUT", 0x00, "Thai"),
    c(0x0E81, None, "LAO LETTER KO", 0x31, "Lao"),
    c(0x0E82, None, "LAO LETTER KHO SUNG", 0x31, "Lao"),
    c(0x0E84, None, "LAO LETTER KHO TAM", 0x31, "Lao"),
    c(0x0E86, None, "LAO LETTER PALI GHA", 0x31, "Lao"),
    c(0x0E87, None, "LAO LETTER NGO", 0x31, "Lao"),
    c(0x0E88, None, "LAO LETTER CO", 0x31, "Lao"),
    c(0x0E89, None, "LAO LETTER PALI CHA", 0x31, "Lao"),
    c(0x0E8A, None, "LAO LETTER SO TAM", 0x31, "Lao"),
    c(0x0E8C, None, "LAO LETTER PALI JHA", 0x31, "Lao"),
    c(0x0E8D, None, "LAO LETTER NYO", 0x31, "Lao"),
    c(0x0E8E, None, "LAO LETTER PALI NYA", 0x31, "Lao"),
    c(0x0E8F, None, "LAO LETTER PALI TTA", 0x31, "Lao"),
    c(0x0E90, None, "LAO LETTER PALI TTHA", 0x31, "Lao"),
    c(0x0E91, None, "LAO LETTER PALI DDA", 0x31, "Lao"),
    c(0x0E92, None, "LAO LETTER PALI DDHA", 0x31, "Lao"),
    c(0x0E93, None, "LAO LETTER PALI NNA", 0x31, "Lao"),
    c(0x0E94, None, "LAO LETTER DO", 0x31, "Lao"),
    c(0x0E95, None, "LAO LETTER TO", 0x31, "Lao"),
    c(0x0E96, None, "LAO LETTER THO SUNG", 0x31, "Lao"),
    c(0x0E97, None, "LAO LETTER THO TAM", 0x31, "Lao"),
    c(0x0E98, None, "LAO LETTER PALI DHA", 0x31, "Lao"),
    c(0x0E99, None, "LAO LETTER NO", 0x31, "Lao"),
    c(0x0E9A, None, "LAO LETTER BO", 0x31, "Lao"),
    c(0x0E9B, None, "LAO LETTER PO", 0x31, "Lao"),
    c(0x0E9C, None, "LAO LETTER PHO SUNG", 0x31, "Lao"),
    c(0x0E9D, None, "LAO LETTER FO FON", 0x31, "Lao"),
    c(0x0E9E, None, "LAO LETTER PHO TAM", 0x31, "Lao"),
    c(0x0E9F, None, "LAO LETTER FO FAY", 0x31, "Lao"),
    c(0x0EA0, None, "LAO LETTER PALI BHA", 0x31, "Lao"),
    c(0x0EA1, None, "LAO LETTER MO", 0x31, "Lao"),
    c(0x0EA2, None, "LAO LETTER YO", 0x31, "Lao"),
    c(0x0EA3, None, "LAO LETTER RO", 0x31, "Lao"),
    c(0x0EA5, None, "LAO LETTER LO", 0x31, "Lao"),
    c(0x0EA7, None, "LAO LETTER WO", 0x31, "Lao"),
    c(0x0EA8, None, "LAO LETTER SANSKRIT SHA", 0x31, "Lao"),
    c(0x0EA9, None, "LAO LETTER SANSKRIT SSA", 0x31, "Lao"),
    c(0x0EAA, None, "LAO LETTER SO SUNG", 0x31, "Lao"),
    c(0x0EAB, None, "LAO LETTER HO SUNG", 0x31, "Lao"),
    c(0x0EAC, None, "LAO LETTER PALI LLA", 0x31, "Lao"),
    c(0x0EAD, None, "LAO LETTER O", 0x31, "Lao"),
    c(0x0EAE, None, "LAO LETTER HO TAM", 0x31, "Lao"),
    c(0x0EAF, None, "LAO ELLIPSIS", 0x31, "Lao"),
    c(0x0EB0, None, "LAO VOWEL SIGN A", 0x31, "Lao"),
    c(0x0EB1, None, "LAO VOWEL SIGN MAI KAN", 0x21, "Lao"),
    c(0x0EB2, None, "LAO VOWEL SIGN AA", 0x31, "Lao"),
    c(0x0EB3, None, "LAO VOWEL SIGN AM", 0x21, "Lao"),
    c(0x0EB4, None, "LAO VOWEL SIGN I", 0x21, "Lao"),
    c(0x0EB5, None, "LAO VOWEL SIGN II", 0x21, "Lao"),
    c(0x0EB6, None, "LAO VOWEL SIGN Y", 0x21, "Lao"),
    c(0x0EB7, None, "LAO VOWEL SIGN YY", 0x21, "Lao"),
    c(0x0EB8, None, "LAO VOWEL SIGN U", 0x21, "Lao"),
    c(0x0EB9, None, "LAO VOWEL SIGN UU", 0x21, "Lao"),
    c(0x0EBA, None, "LAO SIGN PALI VIRAMA", 0x20, "Lao"),
    c(0x0EBB, None, "LAO VOWEL SIGN MAI KON", 0x21, "Lao"),
    c(0x0EBC, None, "LAO SEMIVOWEL SIGN LO", 0x21, "Lao"),
    c(0x0EBD, None, "LAO SEMIVOWEL SIGN NYO", 0x31, "Lao"),
    c(0x0EC0, None, "LAO VOWEL SIGN E", 0x31, "Lao"),
    c(0x0EC1, None, "LAO VOWEL SIGN EI", 0x31, "Lao"),
    c(0x0EC2, None, "LAO VOWEL SIGN O", 0x31, "Lao"),
    c(0x0EC3, None, "LAO VOWEL SIGN AY", 0x31, "Lao"),
    c(0x0EC4, None, "LAO VOWEL SIGN AI", 0x31, "Lao"),
    c(0x0EC6, None, "LAO KO LA", 0x31, "Lao"),
    c(0x0EC8, None, "LAO TONE MAI EK", 0x20, "Lao"),
    c(0x0EC9, None, "LAO TONE MAI THO", 0x20, "Lao"),
    c(0x0ECA, None, "LAO TONE MAI TI", 0x20, "Lao"),
    c(0x0ECB, None, "LAO TONE MAI CATAWA", 0x20, "Lao"),
    c(0x0ECC, None, "LAO CANCELLATION MARK", 0x20, "Lao"),
    c(0x0ECD, None, "LAO NIGGAHITA", 0x21, "Lao"),
    c(0x0ED0, None, "LAO DIGIT ZERO", 0x20, "Lao"),
    c(0x0ED1, None, "LAO DIGIT ONE", 0x20, "Lao"),
    c(0x0ED2, None, "LAO DIGIT TWO", 0x20, "Lao"),
    c(0x0ED3, None, "LAO DIGIT THREE", 0x20, "Lao"),
    c(0x0ED4, None, "LAO DIGIT FOUR", 0x20, "Lao"),
    c(0x0ED5, None, "LAO DIGIT FIVE", 0x20, "Lao"),
    c(0x0ED6, None, "LAO DIGIT SIX", 0x20, "Lao"),
    c(0x0ED7, None, "LAO DIGIT SEVEN", 0x20, "Lao"),
    c(0x0ED8, None, "LAO DIGIT EIGHT", 0x20, "Lao"),
    c(0x0ED9, None, "LAO DIGIT NINE", 0x20, "Lao"),
    c(0x0EDC, None, "LAO HO NO", 0x31, "Lao"),
    c(0x0EDD, None, "LAO HO MO", 0x31, "Lao"),
    c(0x0EDE, None, "LAO LETTER KHMU GO", 0x31, "Lao"),
    c(0x0EDF, None, "LAO LETTER KHMU NYO", 0x31, "Lao"),
    c(0x0F00, None, "TIBETAN SYLLABLE OM", 0x31, "Tibetan"),
    c(0x0F01, None, "TIBETAN MARK GTER YIG MGO TRUNCATED A", 0x00, "Tibetan"),
    c(0x0F02, None, "TIBETAN MARK GTER YIG MGO -UM RNAM BCAD MA", 0x00, "Tibetan"),
    c(0x0F03, None, "TIBETAN MARK GTER YIG MGO -UM GTER TSHEG MA", 0x00, "Tibetan"),
    c(0x0F04, None, "TIBETAN MARK INITIAL YIG MGO MDUN MA", 0x00, "Tibetan"),
    c(0x0F05, None, "TIBETAN MARK CLOSING YIG MGO SGAB MA", 0x00, "Tibetan"),
    c(0x0F06, None, "TIBETAN MARK CARET YIG MGO PHUR SHAD MA", 0x00, "Tibetan"),
    c(0x0F07, None, "TIBETAN MARK YIG MGO TSHEG SHAD MA", 0x00, "Tibetan"),
    c(0x0F08, None, "TIBETAN MARK SBRUL SHAD", 0x00, "Tibetan"),
    c(0x0F09, None, "TIBETAN MARK BSKUR YIG MGO", 0x00, "Tibetan"),
    c(0x0F0A, None, "TIBETAN MARK BKA- SHOG YIG MGO", 0x00, "Tibetan"),
    c(0x0F0B, None, "TIBETAN MARK INTERSYLLABIC TSHEG", 0x00, "Tibetan"),
    c(0x0F0C, None, "TIBETAN MARK DELIMITER TSHEG BSTAR", 0x00, "Tibetan"),
    c(0x0F0D, None, "TIBETAN MARK SHAD", 0x00, "Tibetan"),
    c(0x0F0E, None, "TIBETAN MARK NYIS SHAD", 0x00, "Tibetan"),
    c(0x0F0F, None, "TIBETAN MARK TSHEG SHAD", 0x00, "Tibetan"),
    c(0x0F10, None, "TIBETAN MARK NYIS TSHEG SHAD", 0x00, "Tibetan"),
    c(0x0F11, None, "TIBETAN MARK RIN CHEN SPUNGS SHAD", 0x00, "Tibetan"),
    c(0x0F12, None, "TIBETAN MARK RGYA GRAM SHAD", 0x00, "Tibetan"),
    c(0x0F13, None, "TIBETAN MARK CARET -DZUD RTAGS ME LONG CAN", 0x00, "Tibetan"),
    c(0x0F14, None, "TIBETAN MARK GTER TSHEG", 0x00, "Tibetan"),
    c(0x0F15, None, "TIBETAN LOGOTYPE SIGN CHAD RTAGS", 0x00, "Tibetan"),
    c(0x0F16, None, "TIBETAN LOGOTYPE SIGN LHAG RTAGS", 0x00, "Tibetan"),
    c(0x0F17, None, "TIBETAN ASTROLOGICAL SIGN SGRA GCAN -CHAR RTAGS", 0x00, "Tibetan"),
    c(0x0F18, None, "TIBETAN ASTROLOGICAL SIGN -KHYUD PA", 0x20, "Tibetan"),
    c(0x0F19, None, "TIBETAN ASTROLOGICAL SIGN SDONG TSHUGS", 0x20, "Tibetan"),
    c(0x0F1A, None, "TIBETAN SIGN RDEL DKAR GCIG", 0x00, "Tibetan"),
    c(0x0F1B, None, "TIBETAN SIGN RDEL DKAR GNYIS", 0x00, "Tibetan"),
    c(0x0F1C, None, "TIBETAN SIGN RDEL DKAR GSUM", 0x00, "Tibetan"),
    c(0x0F1D, None, "TIBETAN SIGN RDEL NAG GCIG", 0x00, "Tibetan"),
    c(0x0F1E, None, "TIBETAN SIGN RDEL NAG GNYIS", 0x00, "Tibetan"),
    c(0x0F1F, None, "TIBETAN SIGN RDEL DKAR RDEL NAG", 0x00, "Tibetan"),
    c(0x0F20, None, "TIBETAN DIGIT ZERO", 0x20, "Tibetan"),
    c(0x0F21, None, "TIBETAN DIGIT ONE", 0x20, "Tibetan"),
    c(0x0F22, None, "TIBETAN DIGIT TWO", 0x20, "Tibetan"),
    c(0x0F23, None, "TIBETAN DIGIT THREE", 0x20, "Tibetan"),
    c(0x0F24, None, "TIBETAN DIGIT FOUR", 0x20, "Tibetan"),
    c(0x0F25, None, "TIBETAN DIGIT FIVE", 0x20, "Tibetan"),
    c(0x0F26, None, "TIBETAN DIGIT SIX", 0x20, "Tibetan"),
    c(0x0F27, None, "TIBETAN DIGIT SEVEN", 0x20, "Tibetan"),
    c(0x0F28, None, "TIBETAN DIGIT EIGHT", 0x20, "Tibetan"),
    c(0x0F29, None, "TIBETAN DIGIT NINE", 0x20, "Tibetan"),
    c(0x0F2A, None, "TIBETAN DIGIT HALF ONE", 0x00, "Tibetan"),
    c(0x0F2B, None, "TIBETAN DIGIT HALF TWO", 0x00, "Tibetan"),
    c(0x0F2C, None, "TIBETAN DIGIT HALF THREE", 0x00, "Tibetan"),
    c(0x0F2D, None, "TIBETAN DIGIT HALF FOUR", 0x00, "Tibetan"),
    c(0x0F2E, None, "TIBETAN DIGIT HALF FIVE", 0x00, "Tibetan"),
    c(0x0F2F, None, "TIBETAN DIGIT HALF SIX", 0x00, "Tibetan"),
    c(0x0F30, None, "TIBETAN DIGIT HALF SEVEN", 0x00, "Tibetan"),
    c(0x0F31, None, "TIBETAN DIGIT HALF EIGHT", 0x00, "Tibetan"),
    c(0x0F32, None, "TIBETAN DIGIT HALF NINE", 0x00, "Tibetan"),
    c(0x0F33, None, "TIBETAN DIGIT HALF ZERO", 0x00, "Tibetan"),
    c(0x0F34, None, "TIBETAN MARK BSDUS RTAGS", 0x00, "Tibetan"),
    c(0x0F35, None, "TIBETAN MARK NGAS BZUNG NYI ZLA", 0x20, "Tibetan"),
    c(0x0F36, None, "TIBETAN MARK CARET -DZUD RTAGS BZHI MIG CAN", 0x00, "Tibetan"),
    c(0x0F37, None, "TIBETAN MARK NGAS BZUNG SGOR RTAGS", 0x20, "Tibetan"),
    c(0x0F38, None, "TIBETAN MARK CHE MGO", 0x00, "Tibetan"),
    c(0x0F39, None, "TIBETAN MARK TSA -PHRU", 0x20, "Tibetan"),
    c(0x0F3A, None, "TIBETAN MARK GUG RTAGS GYON", 0x00, "Tibetan"),
    c(0x0F3B, None, "TIBETAN MARK GUG RTAGS GYAS", 0x00, "Tibetan"),
    c(0x0F3C, None, "TIBETAN MARK ANG KHANG GYON", 0x00, "Tibetan"),
    c(0x0F3D, None, "TIBETAN MARK ANG KHANG GYAS", 0x00, "Tibetan"),
    c(0x0F3E, None, "TIBETAN SIGN YAR TSHES", 0x20, "Tibetan"),
    c(0x0F3F, None, "TIBETAN SIGN MAR TSHES", 0x20, "Tibetan"),
    c(0x0F40, None, "TIBETAN LETTER KA", 0x31, "Tibetan"),
    c(0x0F41, None, "TIBETAN LETTER KHA", 0x31, "Tibetan"),
    c(0x0F42, None, "TIBETAN LETTER GA", 0x31, "Tibetan"),
    c(0x0F43, None, "TIBETAN LETTER GHA", 0x31, "Tibetan"),
    c(0x0F44, None, "TIBETAN LETTER NGA", 0x31, "Tibetan"),
    c(0x0F45, None, "TIBETAN LETTER CA", 0x31, "Tibetan"),
    c(0x0F46, None, "TIBETAN LETTER CHA", 0x31, "Tibetan"),
    c(0x0F47, None, "TIBETAN LETTER JA", 0x31, "Tibetan"),
    c(0x0F49, None, "TIBETAN LETTER NYA", 0x31, "Tibetan"),
    c(0x0F4A, None, "TIBETAN LETTER TTA", 0x31, "Tibetan"),
    c(0x0F4B, None, "TIBETAN LETTER TTHA", 0x31, "Tibetan"),
    c(0x0F4C, None, "TIBETAN LETTER DDA", 0x31, "Tibetan"),
    c(0x0F4D, None, "TIBETAN LETTER DDHA", 0x31, "Tibetan"),
    c(0x0F4E, None, "TIBETAN LETTER NNA", 0x31, "Tibetan"),
    c(0x0F4F, None, "TIBETAN LETTER TA", 0x31, "Tibetan"),
    c(0x0F50, None, "TIBETAN LETTER THA", 0x31, "Tibetan"),
    c(0x0F51, None, "TIBETAN LETTER DA", 0x31, "Tibetan"),
    c(0x0F52, None, "TIBETAN LETTER DHA", 0x31, "Tibetan"),
    c(0x0F53, None, "TIBETAN LETTER NA", 0x31, "Tibetan"),
    c(0x0F54, None, "TIBETAN LETTER PA", 0x31, "Tibetan"),
    c(0x0F55, None, "TIBETAN LETTER PHA", 0x31, "Tibetan"),
    c(0x0F56, None, "TIBETAN LETTER BA", 0x31, "Tibetan"),
    c(0x0F57, None, "TIBETAN LETTER BHA", 0x31, "Tibetan"),
    c(0x0F58, None, "TIBETAN LETTER MA", 0x31, "Tibetan"),
    c(0x0F59, None, "TIBETAN LETTER TSA", 0x31, "Tibetan"),
    c(0x0F5A, None, "TIBETAN LETTER TSHA", 0x31, "Tibetan"),
    c(0x0F5B, None, "TIBETAN LETTER DZA", 0x31, "Tibetan"),
    c(0x0F5C, None, "TIBETAN LETTER DZHA", 0x31, "Tibetan"),
    c(0x0F5D, None, "TIBETAN LETTER WA", 0x31, "Tibetan"),
    c(0x0F5E, None, "TIBETAN LETTER ZHA", 0x31, "Tibetan"),
    c(0x0F5F, None, "TIBETAN LETTER ZA", 0x31, "Tibetan"),
    c(0x0F60, None, "TIBETAN LETTER -A", 0x31, "Tibetan"),
    c(0x0F61, None, "TIBETAN LETTER YA", 0x31, "Tibetan"),
    c(0x0F62, None, "TIBETAN LETTER RA", 0x31, "Tibetan"),
    c(0x0F63, None, "TIBETAN LETTER LA", 0x31, "Tibetan"),
    c(0x0F64, None, "TIBETAN LETTER SHA", 0x31, "Tibetan"),
    c(0x0F65, None, "TIBETAN LETTER SSA", 0x31, "Tibetan"),
    c(0x0F66, None, "TIBETAN LETTER SA", 0x31, "Tibetan"),
    c(0x0F67, None, "TIBETAN LETTER HA", 0x31, "Tibetan"),
    c(0x0F68, None, "TIBETAN LETTER A", 0x31, "Tibetan"),
    c(0x0F69, None, "TIBETAN LETTER KSSA", 0x31, "Tibetan"),
    c(0x0F6A, None, "TIBETAN LETTER FIXED-FORM RA", 0x31, "Tibetan"),
    c(0x0F6B, None, "TIBETAN LETTER KKA", 0x31, "Tibetan"),
    c(0x0F6C, None, "TIBETAN LETTER RRA", 0x31, "Tibetan"),
    c(0x0F71, None, "TIBETAN VOWEL SIGN AA", 0x21, "Tibetan"),
    c(0x0F72, None, "TIBETAN VOWEL SIGN I", 0x21, "Tibetan"),
    c(0x0F73, None, "TIBETAN VOWEL SIGN II", 0x21, "Tibetan"),
    c(0x0F74, None, "TIBETAN VOWEL SIGN U", 0x21, "Tibetan"),
    c(0x0F75, None, "TIBETAN VOWEL SIGN UU", 0x21, "Tibetan"),
    c(0x0F76, None, "TIBETAN VOWEL SIGN VOCALIC R", 0x21, "Tibetan"),
    c(0x0F77, None, "TIBETAN VOWEL SIGN VOCALIC RR", 0x29, "Tibetan"),
    c(0x0F78, None, "TIBETAN VOWEL SIGN VOCALIC L", 0x21, "Tibetan"),
    c(0x0F79, None, "TIBETAN VOWEL SIGN VOCALIC LL", 0x29, "Tibetan"),
    c(0x0F7A, None, "TIBETAN VOWEL SIGN E", 0x21, "Tibetan"),
    c(0x0F7B, None, "TIBETAN VOWEL SIGN EE", 0x21, "Tibetan"),
    c(0x0F7C, None, "TIBETAN VOWEL SIGN O", 0x21, "Tibetan"),
    c(0x0F7D, None, "TIBETAN VOWEL SIGN OO", 0x21, "Tibetan"),
    c(0x0F7E, None, "TIBETAN SIGN RJES SU NGA RO", 0x21, "Tibetan"),
    c(0x0F7F, None, "TIBETAN SIGN RNAM BCAD", 0x21, "Tibetan"),
    c(0x0F80, None, "TIBETAN VOWEL SIGN REVERSED I", 0x21, "Tibetan"),
    c(0x0F81, None, "TIBETAN VOWEL SIGN REVERSED II", 0x21, "Tibetan"),
    c(0x0F82, None, "TIBETAN SIGN NYI ZLA NAA DA", 0x20, "Tibetan"),
    c(0x0F83, None, "TIBETAN SIGN SNA LDAN", 0x20, "Tibetan"),
    c(0x0F84, None, "TIBETAN MARK HALANTA", 0x20, "Tibetan"),
    c(0x0F85, None, "TIBETAN MARK PALUTA", 0x00, "Tibetan"),
    c(0x0F86, None, "TIBETAN SIGN LCI RTAGS", 0x20, "Tibetan"),
    c(0x0F87, None, "TIBETAN SIGN YANG RTAGS", 0x20, "Tibetan"),
    c(0x0F88, None, "TIBETAN SIGN LCE TSA CAN", 0x31, "Tibetan"),
    c(0x0F89, None, "TIBETAN SIGN MCHU CAN", 0x31, "Tibetan"),
    c(0x0F8A, None, "TIBETAN SIGN GRU CAN RGYINGS", 0x31, "Tibetan"),
    c(0x0F8B, None, "TIBETAN SIGN GRU MED RGYINGS", 0x31, "Tibetan"),
    c(0x0F8C, None, "TIBETAN SIGN INVERTED MCHU CAN", 0x31, "Tibetan"),
    c(0x0F8D, None, "TIBETAN SUBJOINED SIGN LCE TSA CAN", 0x21, "Tibetan"),
    c(0x0F8E, None, "TIBETAN SUBJOINED SIGN MCHU CAN", 0x21, "Tibetan"),
    c(0x0F8F, None, "TIBETAN SUBJOINED SIGN INVERTED MCHU CAN", 0x21, "Tibetan"),
    c(0x0F90, None, "TIBETAN SUBJOINED LETTER KA", 0x21, "Tibetan"),
    c(0x0F91, None, "TIBETAN SUBJOINED LETTER KHA", 0x21, "Tibetan"),
    c(0x0F92, None, "TIBETAN SUBJOINED LETTER GA", 0x21, "Tibetan"),
    c(0x0F93, None, "TIBETAN SUBJOINED LETTER GHA", 0x21, "Tibetan"),
    c(0x0F94, None, "TIBETAN SUBJOINED LETTER NGA", 0x21, "Tibetan"),
    c(0x0F95, None, "TIBETAN SUBJOINED LETTER CA", 0x21, "Tibetan"),
    c(0x0F96, None, "TIBETAN SUBJOINED LETTER CHA", 0x21, "Tibetan"),
    c(0x0F97, None, "TIBETAN SUBJOINED LETTER JA", 0x21, "Tibetan"),
    c(0x0F99, None, "TIBETAN SUBJOINED LETTER NYA", 0x21, "Tibetan"),
    c(0x0F9A, None, "TIBETAN SUBJOINED LETTER TTA", 0x21, "Tibetan"),
    c(0x0F9B, None, "TIBETAN SUBJOINED LETTER TTHA", 0x21, "Tibetan"),
    c(0x0F9C, None, "TIBETAN SUBJOINED LETTER DDA", 0x21, "Tibetan"),
    c(0x0F9D, None, "TIBETAN SUBJOINED LETTER DDHA", 0x21, "Tibetan"),
    c(0x0F9E, None, "TIBETAN SUBJOINED LETTER NNA", 0x21, "Tibetan"),
    c(0x0F9F, None, "TIBETAN SUBJOINED LETTER TA", 0x21, "Tibetan"),
    c(0x0FA0, None, "TIBETAN SUBJOINED LETTER THA", 0x21, "Tibetan"),
    c(0x0FA1, None, "TIBETAN SUBJOINED LETTER DA", 0x21, "Tibetan"),
    c(0x0FA2, None, "TIBETAN SUBJOINED LETTER DHA", 0x21, "Tibetan"),
    c(0x0FA3, None, "TIBETAN SUBJOINED LETTER NA", 0x21, "Tibetan"),
    c(0x0FA4, None, "TIBETAN SUBJOINED LETTER PA", 0x21, "Tibetan"),
    c(0x0FA5, None, "TIBETAN SUBJOINED LETTER PHA", 0x21, "Tibetan"),
    c(0x0FA6, None, "TIBETAN SUBJOINED LETTER BA", 0x21, "Tibetan"),
    c(0x0FA7, None, "TIBETAN SUBJOINED LETTER BHA", 0x21, "Tibetan"),
    c(0x0FA8, None, "TIBETAN SUBJOINED LETTER MA", 0x21, "Tibetan"),
    c(0x0FA9, None, "TIBETAN SUBJOINED LETTER TSA", 0x21, "Tibetan"),
    c(0x0FAA, None, "TIBETAN SUBJOINED LETTER TSHA", 0x21, "Tibetan"),
    c(0x0FAB, None, "TIBETAN SUBJOINED LETTER DZA", 0x21, "Tibetan"),
    c(0x0FAC, None, "TIBETAN SUBJOINED LETTER DZHA", 0x21, "Tibetan"),
    c(0x0FAD, None, "TIBETAN SUBJOINED LETTER WA", 0x21, "Tibetan"),
    c(0x0FAE, None, "TIBETAN SUBJOINED LETTER ZHA", 0x21, "Tibetan"),
    c(0x0FAF, None, "TIBETAN SUBJOINED LETTER ZA", 0x21, "Tibetan"),
    c(0x0FB0, None, "TIBETAN SUBJOINED LETTER -A", 0x21, "Tibetan"),
    c(0x0FB1, None, "TIBETAN SUBJOINED LETTER YA", 0x21, "Tibetan"),
    c(0x0FB2, None, "TIBETAN SUBJOINED LETTER RA", 0x21, "Tibetan"),
    c(0x0FB3, None, "TIBETAN SUBJOINED LETTER LA", 0x21, "Tibetan"),
    c(0x0FB4, None, "TIBETAN SUBJOINED LETTER SHA", 0x21, "Tibetan"),
    c(0x0FB5, None, "TIBETAN SUBJOINED LETTER SSA", 0x21, "Tibetan"),
    c(0x0FB6, None, "TIBETAN SUBJOINED LETTER SA", 0x21, "Tibetan"),
    c(0x0FB7, None, "TIBETAN SUBJOINED LETTER HA", 0x21, "Tibetan"),
    c(0x0FB8, None, "TIBETAN SUBJOINED LETTER A", 0x21, "Tibetan"),
    c(0x0FB9, None, "TIBETAN SUBJOINED LETTER KSSA", 0x21, "Tibetan"),
    c(0x0FBA, None, "TIBETAN SUBJOINED LETTER FIXED-FORM WA", 0x21, "Tibetan"),
    c(0x0FBB, None, "TIBETAN SUBJOINED LETTER FIXED-FORM YA", 0x21, "Tibetan"),
    c(0x0FBC, None, "TIBETAN SUBJOINED LETTER FIXED-FORM RA", 0x21, "Tibetan"),
    c(0x0FBE, None, "TIBETAN KU RU KHA", 0x00, "Tibetan"),
    c(0x0FBF, None, "TIBETAN KU RU KHA BZHI MIG CAN", 0x00, "Tibetan"),
    c(0x0FC0, None, "TIBETAN CANTILLATION SIGN HEAVY BEAT", 0x00, "Tibetan"),
    c(0x0FC1, None, "TIBETAN CANTILLATION SIGN LIGHT BEAT", 0x00, "Tibetan"),
    c(0x0FC2, None, "TIBETAN CANTILLATION SIGN CANG TE-U", 0x00, "Tibetan"),
    c(0x0FC3, None, "TIBETAN CANTILLATION SIGN SBUB -CHAL", 0x00, "Tibetan"),
    c(0x0FC4, None, "TIBETAN SYMBOL DRIL BU", 0x00, "Tibetan"),
    c(0x0FC5, None, "TIBETAN SYMBOL RDO RJE", 0x00, "Tibetan"),
    c(0x0FC6, None, "TIBETAN SYMBOL PADMA GDAN", 0x20, "Tibetan"),
    c(0x0FC7, None, "TIBETAN SYMBOL RDO RJE RGYA GRAM", 0x00, "Tibetan"),
    c(0x0FC8, None, "TIBETAN SYMBOL PHUR PA", 0x00, "Tibetan"),
    c(0x0FC9, None, "TIBETAN SYMBOL NOR BU", 0x00, "Tibetan"),
    c(0x0FCA, None, "TIBETAN SYMBOL NOR BU NYIS -KHYIL", 0x00, "Tibetan"),
    c(0x0FCB, None, "TIBETAN SYMBOL NOR BU GSUM -KHYIL", 0x00, "Tibetan"),
    c(0x0FCC, None, "TIBETAN SYMBOL NOR BU BZHI -KHYIL", 0x00, "Tibetan"),
    c(0x0FCE, None, "TIBETAN SIGN RDEL NAG RDEL DKAR", 0x00, "Tibetan"),
    c(0x0FCF, None, "TIBETAN SIGN RDEL NAG GSUM", 0x00, "Tibetan"),
    c(0x0FD0, None, "TIBETAN MARK BKA- SHOG GI MGO RGYAN", 0x00, "Tibetan"),
    c(0x0FD1, None, "TIBETAN MARK MNYAM YIG GI MGO RGYAN", 0x00, "Tibetan"),
    c(0x0FD2, None, "TIBETAN MARK NYIS TSHEG", 0x00, "Tibetan"),
    c(0x0FD3, None, "TIBETAN MARK INITIAL BRDA RNYING YIG MGO MDUN MA", 0x00, "Tibetan"),
    c(0x0FD4, None, "TIBETAN MARK CLOSING BRDA RNYING YIG MGO SGAB MA", 0x00, "Tibetan"),
    c(0x0FD5, None, "RIGHT-FACING SVASTI SIGN", 0x00, "Tibetan"),
    c(0x0FD6, None, "LEFT-FACING SVASTI SIGN", 0x00, "Tibetan"),
    c(0x0FD7, None, "RIGHT-FACING SVASTI SIGN WITH DOTS", 0x00, "Tibetan"),
    c(0x0FD8, None, "LEFT-FACING SVASTI SIGN WITH DOTS", 0x00, "Tibetan"),
    c(0x0FD9, None, "TIBETAN MARK LEADING MCHAN RTAGS", 0x00, "Tibetan"),
    c(0x0FDA, None, "TIBETAN MARK TRAILING MCHAN RTAGS", 0x00, "Tibetan"),
    c(0x1000, None, "MYANMAR LETTER KA", 0x31, "Myanmar"),
    c(0x1001, None, "MYANMAR LETTER KHA", 0x31, "Myanmar"),
    c(0x1002, None, "MYANMAR LETTER GA", 0x31, "Myanmar"),
    c(0x1003, None, "MYANMAR LETTER GHA", 0x31, "Myanmar"),
    c(0x1004, None, "MYANMAR LETTER NGA", 0x31, "Myanmar"),
    c(0x1005, None, "MYANMAR LETTER CA", 0x31, "Myanmar"),
    c(0x1006, None, "MYANMAR LETTER CHA", 0x31, "Myanmar"),
    c(0x1007, None, "MYANMAR LETTER JA", 0x31, "Myanmar"),
    c(0x1008, None, "MYANMAR LETTER JHA", 0x31, "Myanmar"),
    c(0x1009, None, "MYANMAR LETTER NYA", 0x31, "Myanmar"),
    c(0x100A, None, "MYANMAR LETTER NNYA", 0x31, "Myanmar"),
    c(0x100B, None, "MYANMAR LETTER TTA", 0x31, "Myanmar"),
    c(0x100C, None, "MYANMAR LETTER TTHA", 0x31, "Myanmar"),
    c(0x100D, None, "MYANMAR LETTER DDA", 0x31, "Myanmar"),
    c(0x100E, None, "MYANMAR LETTER DDHA", 0x31, "Myanmar"),
    c(0x100F, None, "MYANMAR LETTER NNA", 0x31, "Myanmar"),
    c(0x1010, None, "MYANMAR LETTER TA", 0x31, "Myanmar"),
    c(0x1011, None, "MYANMAR LETTER THA", 0x31, "Myanmar"),
    c(0x1012, None, "MYANMAR LETTER DA", 0x31, "Myanmar"),
    c(0x1013, None, "MYANMAR LETTER DHA", 0x31, "Myanmar"),
    c(0x1014, None, "MYANMAR LETTER NA", 0x31, "Myanmar"),
    c(0x1015, None, "MYANMAR LETTER PA", 0x31, "Myanmar"),
    c(0x1016, None, "MYANMAR LETTER PHA", 0x31, "Myanmar"),
    c(0x1017, None, "MYANMAR LETTER BA", 0x31, "Myanmar"),
    c(0x1018, None, "MYANMAR LETTER BHA", 0x31, "Myanmar"),
    c(0x1019, None, "MYANMAR LETTER MA", 0x31, "Myanmar"),
    c(0x101A, None, "MYANMAR LETTER YA", 0x31, "Myanmar"),
    c(0x101B, None, "MYANMAR LETTER RA", 0x31, "Myanmar"),
    c(0x101C, None, "MYANMAR LETTER LA", 0x31, "Myanmar"),
    c(0x101D, None, "MYANMAR LETTER WA", 0x31, "Myanmar"),
    c(0x101E, None, "MYANMAR LETTER SA", 0x31, "Myanmar"),
    c(0x101F, None, "MYANMAR LETTER HA", 0x31, "Myanmar"),
    c(0x1020, None, "MYANMAR LETTER LLA", 0x31, "Myanmar"),
    c(0x1021, None, "MYANMAR LETTER A", 0x31, "Myanmar"),
    c(0x1022, None, "MYANMAR LETTER SHAN A", 0x31, "Myanmar"),
    c(0x1023, None, "MYANMAR LETTER I", 0x31, "Myanmar"),
    c(0x1024, None, "MYANMAR LETTER II", 0x31, "Myanmar"),
    c(0x1025, None, "MYANMAR LETTER U", 0x31, "Myanmar"),
    c(0x1026, None, "MYANMAR LETTER UU", 0x31, "Myanmar"),
    c(0x1027, None, "MYANMAR LETTER E", 0x31, "Myanmar"),
    c(0x1028, None, "MYANMAR LETTER MON E", 0x31, "Myanmar"),
    c(0x1029, None, "MYANMAR LETTER O", 0x31, "Myanmar"),
    c(0x102A, None, "MYANMAR LETTER AU", 0x31, "Myanmar"),
    c(0x102B, None, "MYANMAR VOWEL SIGN TALL AA", 0x21, "Myanmar"),
    c(0x102C, None, "MYANMAR VOWEL SIGN AA", 0x21, "Myanmar"),
    c(0x102D, None, "MYANMAR VOWEL SIGN I", 0x21, "Myanmar"),
    c(0x102E, None, "MYANMAR VOWEL SIGN II", 0x21, "Myanmar"),
    c(0x102F, None, "MYANMAR VOWEL SIGN U", 0x21, "Myanmar"),
    c(0x1030, None, "MYANMAR VOWEL SIGN UU", 0x21, "Myanmar"),
    c(0x1031, None, "MYANMAR VOWEL SIGN E", 0x21, "Myanmar"),
    c(0x1032, None, "MYANMAR VOWEL SIGN AI", 0x21, "Myanmar"),
    c(0x1033, None, "MYANMAR VOWEL SIGN MON II", 0x21, "Myanmar"),
    c(0x1034, None, "MYANMAR VOWEL SIGN MON O", 0x21, "Myanmar"),
    c(0x1035, None, "MYANMAR VOWEL SIGN E ABOVE", 0x21, "Myanmar"),
    c(0x1036, None, "MYANMAR SIGN ANUSVARA", 0x21, "Myanmar"),
    c(0x1037, None, "MYANMAR SIGN DOT BELOW", 0x20, "Myanmar"),
    c(0x1038, None, "MYANMAR SIGN VISARGA", 0x21, "Myanmar"),
    c(0x1039, None, "MYANMAR SIGN VIRAMA", 0x20, "Myanmar"),
    c(0x103A, None, "MYANMAR SIGN ASAT", 0x20, "Myanmar"),
    c(0x103B, None, "MYANMAR CONSONANT SIGN MEDIAL YA", 0x21, "Myanmar"),
    c(0x103C, None, "MYANMAR CONSONANT SIGN MEDIAL RA", 0x21, "Myanmar"),
    c(0x103D, None, "MYANMAR CONSONANT SIGN MEDIAL WA", 0x21, "Myanmar"),
    c(0x103E, None, "MYANMAR CONSONANT SIGN MEDIAL HA", 0x21, "Myanmar"),
    c(0x103F, None, "MYANMAR LETTER GREAT SA", 0x31, "Myanmar"),
    c(0x1040, None, "MYANMAR DIGIT ZERO", 0x20, "Myanmar"),
    c(0x1041, None, "MYANMAR DIGIT ONE", 0x20, "Myanmar"),
    c(0x1042, None, "MYANMAR DIGIT TWO", 0x20, "Myanmar"),
    c(0x1043, None, "MYANMAR DIGIT THREE", 0x20, "Myanmar"),
    c(0x1044, None, "MYANMAR DIGIT FOUR", 0x20, "Myanmar"),
    c(0x1045, None, "MYANMAR DIGIT FIVE", 0x20, "Myanmar"),
    c(0x1046, None, "MYANMAR DIGIT SIX", 0x20, "Myanmar"),
    c(0x1047, None, "MYANMAR DIGIT SEVEN", 0x20, "Myanmar"),
    c(0x1048, None, "MYANMAR DIGIT EIGHT", 0x20, "Myanmar"),
    c(0x1049, None, "MYANMAR DIGIT NINE", 0x20, "Myanmar"),
    c(0x104A, None, "MYANMAR SIGN LITTLE SECTION", 0x00, "Myanmar"),
    c(0x104B, None, "MYANMAR SIGN SECTION", 0x00, "Myanmar"),
    c(0x104C, None, "MYANMAR SYMBOL LOCATIVE", 0x00, "Myanmar"),
    c(0x104D, None, "MYANMAR SYMBOL COMPLETED", 0x00, "Myanmar"),
    c(0x104E, None, "MYANMAR SYMBOL AFOREMENTIONED", 0x00, "Myanmar"),
    c(0x104F, None, "MYANMAR SYMBOL GENITIVE", 0x00, "Myanmar"),
    c(0x1050, None, "MYANMAR LETTER SHA", 0x31, "Myanmar"),
    c(0x1051, None, "MYANMAR LETTER SSA", 0x31, "Myanmar"),
    c(0x1052, None, "MYANMAR LETTER VOCALIC R", 0x31, "Myanmar"),
    c(0x1053, None, "MYANMAR LETTER VOCALIC RR", 0x31, "Myanmar"),
    c(0x1054, None, "MYANMAR LETTER VOCALIC L", 0x31, "Myanmar"),
    c(0x1055, None, "MYANMAR LETTER VOCALIC LL", 0x31, "Myanmar"),
    c(0x1056, None, "MYANMAR VOWEL SIGN VOCALIC R", 0x21, "Myanmar"),
    c(0x1057, None, "MYANMAR VOWEL SIGN VOCALIC RR", 0x21, "Myanmar"),
    c(0x1058, None, "MYANMAR VOWEL SIGN VOCALIC L", 0x21, "Myanmar"),
    c(0x1059, None, "MYANMAR VOWEL SIGN VOCALIC LL", 0x21, "Myanmar"),
    c(0x105A, None, "MYANMAR LETTER MON NGA", 0x31, "Myanmar"),
    c(0x105B, None, "MYANMAR LETTER MON JHA", 0x31, "Myanmar"),
    c(0x105C, None, "MYANMAR LETTER MON BBA", 0x31, "Myanmar"),
    c(0x105D, None, "MYANMAR LETTER MON BBE", 0x31, "Myanmar"),
    c(0x105E, None, "MYANMAR CONSONANT SIGN MON MEDIAL NA", 0x21, "Myanmar"),
    c(0x105F, None, "MYANMAR CONSONANT SIGN MON MEDIAL MA", 0x21, "Myanmar"),
    c(0x1060, None, "MYANMAR CONSONANT SIGN MON MEDIAL LA", 0x21, "Myanmar"),
    c(0x1061, None, "MYANMAR LETTER SGAW KAREN SHA", 0x31, "Myanmar"),
    c(0x1062, None, "MYANMAR VOWEL SIGN SGAW KAREN EU", 0x21, "Myanmar"),
    c(0x1063, None, "MYANMAR TONE MARK SGAW KAREN HATHI", 0x21, "Myanmar"),
    c(0x1064, None, "MYANMAR TONE MARK SGAW KAREN KE PHO", 0x21, "Myanmar"),
    c(0x1065, None, "MYANMAR LETTER WESTERN PWO KAREN THA", 0x31, "Myanmar"),
    c(0x1066, None, "MYANMAR LETTER WESTERN PWO KAREN PWA", 0x31, "Myanmar"),
    c(0x1067, None, "MYANMAR VOWEL SIGN WESTERN PWO KAREN EU", 0x21, "Myanmar"),
    c(0x1068, None, "MYANMAR VOWEL SIGN WESTERN PWO KAREN UE", 0x21, "Myanmar"),
    c(0x1069, None, "MYANMAR SIGN WESTERN PWO KAREN TONE-1", 0x21, "Myanmar"),
    c(0x106A, None, "MYANMAR SIGN WESTERN PWO KAREN TONE-2", 0x21, "Myanmar"),
    c(0x106B, None, "MYANMAR SIGN WESTERN PWO KAREN TONE-3", 0x21, "Myanmar"),
    c(0x106C, None, "MYANMAR SIGN WESTERN PWO KAREN TONE-4", 0x21, "Myanmar"),
    c(0x106D, None, "MYANMAR SIGN WESTERN PWO KAREN TONE-5", 0x21, "Myanmar"),
    c(0x106E, None, "MYANMAR LETTER EASTERN PWO KAREN NNA", 0x31, "Myanmar"),
    c(0x106F, None, "MYANMAR LETTER EASTERN PWO KAREN YWA", 0x31, "Myanmar"),
    c(0x1070, None, "MYANMAR LETTER EASTERN PWO KAREN GHWA", 0x31, "Myanmar"),
    c(0x1071, None, "MYANMAR VOWEL SIGN GEBA KAREN I", 0x21, "Myanmar"),
    c(0x1072, None, "MYANMAR VOWEL SIGN KAYAH OE", 0x21, "Myanmar"),
    c(0x1073, None, "MYANMAR VOWEL SIGN KAYAH U", 0x21, "Myanmar"),
    c(0x1074, None, "MYANMAR VOWEL SIGN KAYAH EE", 0x21, "Myanmar"),
    c(0x1075, None, "MYANMAR LETTER SHAN KA", 0x31, "Myanmar"),
    c(0x1076, None, "MYANMAR LETTER SHAN KHA", 0x31, "Myanmar"),
    c(0x1077, None, "MYANMAR LETTER SHAN GA", 0x31, "Myanmar"),
    c(0x1078, None, "MYANMAR LETTER SHAN CA", 0x31, "Myanmar"),
    c(0x1079, None, "MYANMAR LETTER SHAN ZA", 0x31, "Myanmar"),
    c(0x107A, None, "MYANMAR LETTER SHAN NYA", 0x31, "Myanmar"),
    c(0x107B, None, "MYANMAR LETTER SHAN DA", 0x31, "Myanmar"),
    c(0x107C, None, "MYANMAR LETTER SHAN NA", 0x31, "Myanmar"),
    c(0x107D, None, "MYANMAR LETTER SHAN PHA", 0x31, "Myanmar"),
    c(0x107E, None, "MYANMAR LETTER SHAN FA", 0x31, "Myanmar"),
    c(0x107F, None, "MYANMAR LETTER SHAN BA", 0x31, "Myanmar"),
    c(0x1080, None, "MYANMAR LETTER SHAN THA", 0x31, "Myanmar"),
    c(0x1081, None, "MYANMAR LETTER SHAN HA", 0x31, "Myanmar"),
    c(0x1082, None, "MYANMAR CONSONANT SIGN SHAN MEDIAL WA", 0x21, "Myanmar"),
    c(0x1083, None, "MYANMAR VOWEL SIGN SHAN AA", 0x21, "Myanmar"),
    c(0x1084, None, "MYANMAR VOWEL SIGN SHAN E", 0x21, "Myanmar"),
    c(0x1085, None, "MYANMAR VOWEL SIGN SHAN E ABOVE", 0x21, "Myanmar"),
    c(0x1086, None, "MYANMAR VOWEL SIGN SHAN FINAL Y", 0x21, "Myanmar"),
    c(0x1087, None, "MYANMAR SIGN SHAN TONE-2", 0x21, "Myanmar"),
    c(0x1088, None, "MYANMAR SIGN SHAN TONE-3", 0x21, "Myanmar"),
    c(0x1089, None, "MYANMAR SIGN SHAN TONE-5", 0x21, "Myanmar"),
    c(0x108A, None, "MYANMAR SIGN SHAN TONE-6", 0x21, "Myanmar"),
    c(0x108B, None, "MYANMAR SIGN SHAN COUNCIL TONE-2", 0x21, "Myanmar"),
    c(0x108C, None, "MYANMAR SIGN SHAN COUNCIL TONE-3", 0x21, "Myanmar"),
    c(0x108D, None, "MYANMAR SIGN SHAN COUNCIL EMPHATIC TONE", 0x21, "Myanmar"),
    c(0x108E, None, "MYANMAR LETTER RUMAI PALAUNG FA", 0x31, "Myanmar"),
    c(0x108F, None, "MYANMAR SIGN RUMAI PALAUNG TONE-5", 0x21, "Myanmar"),
    c(0x1090, None, "MYANMAR SHAN DIGIT ZERO", 0x20, "Myanmar"),
    c(0x1091, None, "MYANMAR SHAN DIGIT ONE", 0x20, "Myanmar"),
    c(0x1092, None, "MYANMAR SHAN DIGIT TWO", 0x20, "Myanmar"),
    c(0x1093, None, "MYANMAR SHAN DIGIT THREE", 0x20, "Myanmar"),
    c(0x1094, None, "MYANMAR SHAN DIGIT FOUR", 0x20, "Myanmar"),
    c(0x1095, None, "MYANMAR SHAN DIGIT FIVE", 0x20, "Myanmar"),
    c(0x1096, None, "MYANMAR SHAN DIGIT SIX", 0x20, "Myanmar"),
    c(0x1097, None, "MYANMAR SHAN DIGIT SEVEN", 0x20, "Myanmar"),
    c(0x1098, None, "MYANMAR SHAN DIGIT EIGHT", 0x20, "Myanmar"),
    c(0x1099, None, "MYANMAR SHAN DIGIT NINE", 0x20, "Myanmar"),
    c(0x109A, None, "MYANMAR SIGN KHAMTI TONE-1", 0x21, "Myanmar"),
    c(0x109B, None, "MYANMAR SIGN KHAMTI TONE-3", 0x21, "Myanmar"),
    c(0x109C, None, "MYANMAR VOWEL SIGN AITON A", 0x21, "Myanmar"),
    c(0x109D, None, "MYANMAR VOWEL SIGN AITON AI", 0x21, "Myanmar"),
    c(0x109E, None, "MYANMAR SYMBOL SHAN ONE", 0x00, "Myanmar"),
    c(0x109F, None, "MYANMAR SYMBOL SHAN EXCLAMATION", 0x00, "Myanmar"),
    c(0x10A0, None, "GEORGIAN CAPITAL LETTER AN", 0x31, "Georgian"),
    c(0x10A1, None, "GEORGIAN CAPITAL LETTER BAN", 0x31, "Georgian"),
    c(0x10A2, None, "GEORGIAN CAPITAL LETTER GAN", 0x31, "Georgian"),
    c(0x10A3, None, "GEORGIAN CAPITAL LETTER DON", 0x31, "Georgian"),
    c(0x10A4, None, "GEORGIAN CAPITAL LETTER EN", 0x31, "Georgian"),
    c(0x10A5, None, "GEORGIAN CAPITAL LETTER VIN", 0x31, "Georgian"),
    c(0x10A6, None, "GEORGIAN CAPITAL LETTER ZEN", 0x31, "Georgian"),
    c(0x10A7, None, "GEORGIAN CAPITAL LETTER TAN", 0x31, "Georgian"),
    c(0x10A8, None, "GEORGIAN CAPITAL LETTER IN", 0x31, "Georgian"),
    c(0x10A9, None, "GEORGIAN CAPITAL LETTER KAN", 0x31, "Georgian"),
    c(0x10AA, None, "GEORGIAN CAPITAL LETTER LAS", 0x31, "Georgian"),
    c(0x10AB, None, "GEORGIAN CAPITAL LETTER MAN", 0x31, "Georgian"),
    c(0x10AC, None, "GEORGIAN CAPITAL LETTER NAR", 0x31, "Georgian"),
    c(0x10AD, None, "GEORGIAN CAPITAL LETTER ON", 0x31, "Georgian"),
    c(0x10AE, None, "GEORGIAN CAPITAL LETTER PAR", 0x31, "Georgian"),
    c(0x10AF, None, "GEORGIAN CAPITAL LETTER ZHAR", 0x31, "Georgian"),
    c(0x10B0, None, "GEORGIAN CAPITAL LETTER RAE", 0x31, "Georgian"),
    c(0x10B1, None, "GEORGIAN CAPITAL LETTER SAN", 0x31, "Georgian"),
    c(0x10B2, None, "GEORGIAN CAPITAL LETTER TAR", 0x31, "Georgian"),
    c(0x10B3, None, "GEORGIAN CAPITAL LETTER UN", 0x31, "Georgian"),
    c(0x10B4, None, "GEORGIAN CAPITAL LETTER PHAR", 0x31, "Georgian"),
    c(0x10B5, None, "GEORGIAN CAPITAL LETTER KHAR", 0x31, "Georgian"),
    c(0x10B6, None, "GEORGIAN CAPITAL LETTER GHAN", 0x31, "Georgian"),
    c(0x10B7, None, "GEORGIAN CAPITAL LETTER QAR", 0x31, "Georgian"),
    c(0x10B8, None, "GEORGIAN CAPITAL LETTER SHIN", 0x31, "Georgian"),
    c(0x10B9, None, "GEORGIAN CAPITAL LETTER CHIN", 0x31, "Georgian"),
    c(0x10BA, None, "GEORGIAN CAPITAL LETTER CAN", 0x31, "Georgian"),
    c(0x10BB, None, "GEORGIAN CAPITAL LETTER JIL", 0x31, "Georgian"),
    c(0x10BC, None, "GEORGIAN CAPITAL LETTER CIL", 0x31, "Georgian"),
    c(0x10BD, None, "GEORGIAN CAPITAL LETTER CHAR", 0x31, "Georgian"),
    c(0x10BE, None, "GEORGIAN CAPITAL LETTER XAN", 0x31, "Georgian"),
    c(0x10BF, None, "GEORGIAN CAPITAL LETTER JHAN", 0x31, "Georgian"),
    c(0x10C0, None, "GEORGIAN CAPITAL LETTER HAE", 0x31, "Georgian"),
    c(0x10C1, None, "GEORGIAN CAPITAL LETTER HE", 0x31, "Georgian"),
    c(0x10C2, None, "GEORGIAN CAPITAL LETTER HIE", 0x31, "Georgian"),
    c(0x10C3, None, "GEORGIAN CAPITAL LETTER WE", 0x31, "Georgian"),
    c(0x10C4, None, "GEORGIAN CAPITAL LETTER HAR", 0x31, "Georgian"),
    c(0x10C5, None, "GEORGIAN CAPITAL LETTER HOE", 0x31, "Georgian"),
    c(0x10C7, None, "GEORGIAN CAPITAL LETTER YN", 0x31, "Georgian"),
    c(0x10CD, None, "GEORGIAN CAPITAL LETTER AEN", 0x31, "Georgian"),
    c(0x10D0, None, "GEORGIAN LETTER AN", 0x31, "Georgian"),
    c(0x10D1, None, "GEORGIAN LETTER BAN", 0x31, "Georgian"),
    c(0x10D2, None, "GEORGIAN LETTER GAN", 0x31, "Georgian"),
    c(0x10D3, None, "GEORGIAN LETTER DON", 0x31, "Georgian"),
    c(0x10D4, None, "GEORGIAN LETTER EN", 0x31, "Georgian"),
    c(0x10D5, None, "GEORGIAN LETTER VIN", 0x31, "Georgian"),
    c(0x10D6, None, "GEORGIAN LETTER ZEN", 0x31, "Georgian"),
    c(0x10D7, None, "GEORGIAN LETTER TAN", 0x31, "Georgian"),
    c(0x10D8, None, "GEORGIAN LETTER IN", 0x31, "Georgian"),
    c(0x10D9, None, "GEORGIAN LETTER KAN", 0x31, "Georgian"),
    c(0x10DA, None, "GEORGIAN LETTER LAS", 0x31, "Georgian"),
    c(0x10DB, None, "GEORGIAN LETTER MAN", 0x31, "Georgian"),
    c(0x10DC, None, "GEORGIAN LETTER NAR", 0x31, "Georgian"),
    c(0x10DD, None, "GEORGIAN LETTER ON", 0x31, "Georgian"),
    c(0x10DE, None, "GEORGIAN LETTER PAR", 0x31, "Georgian"),
    c(0x10DF, None, "GEORGIAN LETTER ZHAR", 0x31, "Georgian"),
    c(0x10E0, None, "GEORGIAN LETTER RAE", 0x31, "Georgian"),
    c(0x10E1, None, "GEORGIAN LETTER SAN", 0x31, "Georgian"),
    c(0x10E2, None, "GEORGIAN LETTER TAR", 0x31, "Georgian"),
    c(0x10E3, None, "GEORGIAN LETTER UN", 0x31, "Georgian"),
    c(0x10E4, None, "GEORGIAN LETTER PHAR", 0x31, "Georgian"),
    c(0x10E5, None, "GEORGIAN LETTER KHAR", 0x31, "Georgian"),
    c(0x10E6, None, "GEORGIAN LETTER GHAN", 0x31, "Georgian"),
    c(0x10E7, None, "GEORGIAN LETTER QAR", 0x31, "Georgian"),
    c(0x10E8, None, "GEORGIAN LETTER SHIN", 0x31, "Georgian"),
    c(0x10E9, None, "GEORGIAN LETTER CHIN", 0x31, "Georgian"),
    c(0x10EA, None, "GEORGIAN LETTER CAN", 0x31, "Georgian"),
    c(0x10EB, None, "GEORGIAN LETTER JIL", 0x31, "Georgian"),
    c(0x10EC, None, "GEORGIAN LETTER CIL", 0x31, "Georgian"),
    c(0x10ED, None, "GEORGIAN LETTER CHAR", 0x31, "Georgian"),
    c(0x10EE, None, "GEORGIAN LETTER XAN", 0x31, "Georgian"),
    c(0x10EF, None, "GEORGIAN LETTER JHAN", 0x31, "Georgian"),
    c(0x10F0, None, "GEORGIAN LETTER HAE", 0x31, "Georgian"),
    c(0x10F1, None, "GEORGIAN LETTER HE", 0x31, "Georgian"),
    c(0x10F2, None, "GEORGIAN LETTER HIE", 0x31, "Georgian"),
    c(0x10F3, None, "GEORGIAN LETTER WE", 0x31, "Georgian"),
    c(0x10F4, None, "GEORGIAN LETTER HAR", 0x31, "Georgian"),
    c(0x10F5, None, "GEORGIAN LETTER HOE", 0x31, "Georgian"),
    c(0x10F6, None, "GEORGIAN LETTER FI", 0x31, "Georgian"),
    c(0x10F7, None, "GEORGIAN LETTER YN", 0x31, "Georgian"),
    c(0x10F8, None, "GEORGIAN LETTER ELIFI", 0x31, "Georgian"),
    c(0x10F9, None, "GEORGIAN LETTER TURNED GAN", 0x31, "Georgian"),
    c(0x10FA, None, "GEORGIAN LETTER AIN", 0x31, "Georgian"),
    c(0x10FB, None, "GEORGIAN PARAGRAPH SEPARATOR", 0x00, "Georgian"),
    c(0x10FC, None, "MODIFIER LETTER GEORGIAN NAR", 0x31, "Georgian"),
    c(0x10FD, None, "GEORGIAN LETTER AEN", 0x31, "Georgian"),
    c(0x10FE, None, "GEORGIAN LETTER HARD SIGN", 0x31, "Georgian"),
    c(0x10FF, None, "GEORGIAN LETTER LABIAL SIGN", 0x31, "Georgian"),
    c(0x1100, None, "HANGUL CHOSEONG KIYEOK", 0x31, "Jamo"),
    c(0x1101, None, "HANGUL CHOSEONG SSANGKIYEOK", 0x31, "Jamo"),
    c(0x1102, None, "HANGUL CHOSEONG NIEUN", 0x31, "Jamo"),
    c(0x1103, None, "HANGUL CHOSEONG TIKEUT", 0x31, "Jamo"),
    c(0x1104, None, "HANGUL CHOSEONG SSANGTIKEUT", 0x31, "Jamo"),
    c(0x1105, None, "HANGUL CHOSEONG RIEUL", 0x31, "Jamo"),
    c(0x1106, None, "HANGUL CHOSEONG MIEUM", 0x31, "Jamo"),
    c(0x1107, None, "HANGUL CHOSEONG PIEUP", 0x31, "Jamo"),
    c(0x1108, None, "HANGUL CHOSEONG SSANGPIEUP", 0x31, "Jamo"),
    c(0x1109, None, "HANGUL CHOSEONG SIOS", 0x31, "Jamo"),
    c(0x110A, None, "HANGUL CHOSEONG SSANGSIOS", 0x31, "Jamo"),
    c(0x110B, None, "HANGUL CHOSEONG IEUNG", 0x31, "Jamo"),
    c(0x110C, None, "HANGUL CHOSEONG CIEUC", 0x31, "Jamo"),
    c(0x110D, None, "HANGUL CHOSEONG SSANGCIEUC", 0x31, "Jamo"),
    c(0x110E, None, "HANGUL CHOSEONG CHIEUCH", 0x31, "Jamo"),
    c(0x110F, None, "HANGUL CHOSEONG KHIEUKH", 0x31, "Jamo"),
    c(0x1110, None, "HANGUL CHOSEONG THIEUTH", 0x31, "Jamo"),
    c(0x1111, None, "HANGUL CHOSEONG PHIEUPH", 0x31, "Jamo"),
    c(0x1112, None, "HANGUL CHOSEONG HIEUH", 0x31, "Jamo"),
    c(0x1113, None, "HANGUL CHOSEONG NIEUN-KIYEOK", 0x31, "Jamo"),
    c(0x1114, None, "HANGUL CHOSEONG SSANGNIEUN", 0x31, "Jamo"),
    c(0x1115, None, "HANGUL CHOSEONG NIEUN-TIKEUT", 0x31, "Jamo"),
    c(0x1116, None, "HANGUL CHOSEONG NIEUN-PIEUP", 0x31, "Jamo"),
    c(0x1117, None, "HANGUL CHOSEONG TIKEUT-KIYEOK", 0x31, "Jamo"),
    c(0x1118, None, "HANGUL CHOSEONG RIEUL-NIEUN", 0x31, "Jamo"),
    c(0x1119, None, "HANGUL CHOSEONG SSANGRIEUL", 0x31, "Jamo"),
    c(0x111A, None, "HANGUL CHOSEONG RIEUL-HIEUH", 0x31, "Jamo"),
    c(0x111B, None, "HANGUL CHOSEONG KAPYEOUNRIEUL", 0x31, "Jamo"),
    c(0x111C, None, "HANGUL CHOSEONG MIEUM-PIEUP", 0x31, "Jamo"),
    c(0x111D, None, "HANGUL CHOSEONG KAPYEOUNMIEUM", 0x31, "Jamo"),
    c(0x111E, None, "HANGUL CHOSEONG PIEUP-KIYEOK", 0x31, "Jamo"),
    c(0x111F, None, "HANGUL CHOSEONG PIEUP-NIEUN", 0x31, "Jamo"),
    c(0x1120, None, "HANGUL CHOSEONG PIEUP-TIKEUT", 0x31, "Jamo"),
    c(0x1121, None, "HANGUL CHOSEONG PIEUP-SIOS", 0x31, "Jamo"),
    c(0x1122, None, "HANGUL CHOSEONG PIEUP-SIOS-KIYEOK", 0x31, "Jamo"),
    c(0x1123, None, "HANGUL CHOSEONG PIEUP-SIOS-TIKEUT", 0x31, "Jamo"),
    c(0x1124, None, "HANGUL CHOSEONG PIEUP-SIOS-PIEUP", 0x31, "Jamo"),
    c(0x1125, None, "HANGUL CHOSEONG PIEUP-SSANGSIOS", 0x31, "Jamo"),
    c(0x1126, None, "HANGUL CHOSEONG PIEUP-SIOS-CIEUC", 0x31, "Jamo"),
    c(0x1127, None, "HANGUL CHOSEONG PIEUP-CIEUC", 0x31, "Jamo"),
    c(0x1128, None, "HANGUL CHOSEONG PIEUP-CHIEUCH", 0x31, "Jamo"),
    c(0x1129, None, "HANGUL CHOSEONG PIEUP-THIEUTH", 0x31, "Jamo"),
    c(0x112A, None, "HANGUL CHOSEONG PIEUP-PHIEUPH", 0x31, "Jamo"),
    c(0x112B, None, "HANGUL CHOSEONG KAPYEOUNPIEUP", 0x31, "Jamo"),
    c(0x112C, None, "HANGUL CHOSEONG KAPYEOUNSSANGPIEUP", 0x31, "Jamo"),
    c(0x112D, None, "HANGUL CHOSEONG SIOS-KIYEOK", 0x31, "Jamo"),
    c(0x112E, None, "HANGUL CHOSEONG SIOS-NIEUN", 0x31, "Jamo"),
    c(0x112F, None, "HANGUL CHOSEONG SIOS-TIKEUT", 0x31, "Jamo"),
    c(0x1130, None, "HANGUL CHOSEONG SIOS-RIEUL", 0x31, "Jamo"),
    c(0x1131, None, "HANGUL CHOSEONG SIOS-MIEUM", 0x31, "Jamo"),
    c(0x1132, None, "HANGUL CHOSEONG SIOS-PIEUP", 0x31, "Jamo"),
    c(0x1133, None, "HANGUL CHOSEONG SIOS-PIEUP-KIYEOK", 0x31, "Jamo"),
    c(0x1134, None, "HANGUL CHOSEONG SIOS-SSANGSIOS", 0x31, "Jamo"),
    c(0x1135, None, "HANGUL CHOSEONG SIOS-IEUNG", 0x31, "Jamo"),
    c(0x1136, None, "HANGUL CHOSEONG SIOS-CIEUC", 0x31, "Jamo"),
    c(0x1137, None, "HANGUL CHOSEONG SIOS-CHIEUCH", 0x31, "Jamo"),
    c(0x1138, None, "HANGUL CHOSEONG SIOS-KHIEUKH", 0x31, "Jamo"),
    c(0x1139, None, "HANGUL CHOSEONG SIOS-THIEUTH", 0x31, "Jamo"),
    c(0x113A, None, "HANGUL CHOSEONG SIOS-PHIEUPH", 0x31, "Jamo"),
    c(0x113B, None, "HANGUL CHOSEONG SIOS-HIEUH", 0x31, "Jamo"),
    c(0x113C, None, "HANGUL CHOSEONG CHITUEUMSIOS", 0x31, "Jamo"),
    c(0x113D, None, "HANGUL CHOSEONG CHITUEUMSSANGSIOS", 0x31, "Jamo"),
    c(0x113E, None, "HANGUL CHOSEONG CEONGCHIEUMSIOS", 0x31, "Jamo"),
    c(0x113F, None, "HANGUL CHOSEONG CEONGCHIEUMSSANGSIOS", 0x31, "Jamo"),
    c(0x1140, None, "HANGUL CHOSEONG PANSIOS", 0x31, "Jamo"),
    c(0x1141, None, "HANGUL CHOSEONG IEUNG-KIYEOK", 0x31, "Jamo"),
    c(0x1142, None, "HANGUL CHOSEONG IEUNG-TIKEUT", 0x31, "Jamo"),
    c(0x1143, None, "HANGUL CHOSEONG IEUNG-MIEUM", 0x31, "Jamo"),
    c(0x1144, None, "HANGUL CHOSEONG IEUNG-PIEUP", 0x31, "Jamo"),
    c(0x1145, None, "HANGUL CHOSEONG IEUNG-SIOS", 0x31, "Jamo"),
    c(0x1146, None, "HANGUL CHOSEONG IEUNG-PANSIOS", 0x31, "Jamo"),
    c(0x1147, None, "HANGUL CHOSEONG SSANGIEUNG", 0x31, "Jamo"),
    c(0x1148, None, "HANGUL CHOSEONG IEUNG-CIEUC", 0x31, "Jamo"),
    c(0x1149, None, "HANGUL CHOSEONG IEUNG-CHIEUCH", 0x31, "Jamo"),
    c(0x114A, None, "HANGUL CHOSEONG IEUNG-THIEUTH", 0x31, "Jamo"),
    c(0x114B, None, "HANGUL CHOSEONG IEUNG-PHIEUPH", 0x31, "Jamo"),
    c(0x114C, None, "HANGUL CHOSEONG YESIEUNG", 0x31, "Jamo"),
    c(0x114D, None, "HANGUL CHOSEONG CIEUC-IEUNG", 0x31, "Jamo"),
    c(0x114E, None, "HANGUL CHOSEONG CHITUEUMCIEUC", 0x31, "Jamo"),
    c(0x114F, None, "HANGUL CHOSEONG CHITUEUMSSANGCIEUC", 0x31, "Jamo"),
    c(0x1150, None, "HANGUL CHOSEONG CEONGCHIEUMCIEUC", 0x31, "Jamo"),
    c(0x1151, None, "HANGUL CHOSEONG CEONGCHIEUMSSANGCIEUC", 0x31, "Jamo"),
    c(0x1152, None, "HANGUL CHOSEONG CHIEUCH-KHIEUKH", 0x31, "Jamo"),
    c(0x1153, None, "HANGUL CHOSEONG CHIEUCH-HIEUH", 0x31, "Jamo"),
    c(0x1154, None, "HANGUL CHOSEONG CHITUEUMCHIEUCH", 0x31, "Jamo"),
    c(0x1155, None, "HANGUL CHOSEONG CEONGCHIEUMCHIEUCH", 0x31, "Jamo"),
    c(0x1156, None, "HANGUL CHOSEONG PHIEUPH-PIEUP", 0x31, "Jamo"),
    c(0x1157, None, "HANGUL CHOSEONG KAPYEOUNPHIEUPH", 0x31, "Jamo"),
    c(0x1158, None, "HANGUL CHOSEONG SSANGHIEUH", 0x31, "Jamo"),
    c(0x1159, None, "HANGUL CHOSEONG YEORINHIEUH", 0x31, "Jamo"),
    c(0x115A, None, "HANGUL CHOSEONG KIYEOK-TIKEUT", 0x31, "Jamo"),
    c(0x115B, None, "HANGUL CHOSEONG NIEUN-SIOS", 0x31, "Jamo"),
    c(0x115C, None, "HANGUL CHOSEONG NIEUN-CIEUC", 0x31, "Jamo"),
    c(0x115D, None, "HANGUL CHOSEONG NIEUN-HIEUH", 0x31, "Jamo"),
    c(0x115E, None, "HANGUL CHOSEONG TIKEUT-RIEUL", 0x31, "Jamo"),
    c(0x115F, None, "HANGUL CHOSEONG FILLER", 0x31, "Jamo"),
    c(0x1160, None, "HANGUL JUNGSEONG FILLER", 0x31, "Jamo"),
    c(0x1161, None, "HANGUL JUNGSEONG A", 0x31, "Jamo"),
    c(0x1162, None, "HANGUL JUNGSEONG AE", 0x31, "Jamo"),
    c(0x1163, None, "HANGUL JUNGSEONG YA", 0x31, "Jamo"),
    c(0x1164, None, "HANGUL JUNGSEONG YAE", 0x31, "Jamo"),
    c(0x1165, None, "HANGUL JUNGSEONG EO", 0x31, "Jamo"),
    c(0x1166, None, "HANGUL JUNGSEONG E", 0x31, "Jamo"),
    c(0x1167, None, "HANGUL JUNGSEONG YEO", 0x31, "Jamo"),
    c(0x1168, None, "HANGUL JUNGSEONG YE", 0x31, "Jamo"),
    c(0x1169, None, "HANGUL JUNGSEONG O", 0x31, "Jamo"),
    c(0x116A, None, "HANGUL JUNGSEONG WA", 0x31, "Jamo"),
    c(0x116B, None, "HANGUL JUNGSEONG WAE", 0x31, "Jamo"),
    c(0x116C, None, "HANGUL JUNGSEONG OE", 0x31, "Jamo"),
    c(0x116D, None, "HANGUL JUNGSEONG YO", 0x31, "Jamo"),
    c(0x116E, None, "HANGUL JUNGSEONG U", 0x31, "Jamo"),
    c(0x116F, None, "HANGUL JUNGSEONG WEO", 0x31, "Jamo"),
    c(0x1170, None, "HANGUL JUNGSEONG WE", 0x31, "Jamo"),
    c(0x1171, None, "HANGUL JUNGSEONG WI", 0x31, "Jamo"),
    c(0x1172, None, "HANGUL JUNGSEONG YU", 0x31, "Jamo"),
    c(0x1173, None, "HANGUL JUNGSEONG EU", 0x31, "Jamo"),
    c(0x1174, None, "HANGUL JUNGSEONG YI", 0x31, "Jamo"),
    c(0x1175, None, "HANGUL JUNGSEONG I", 0x31, "Jamo"),
    c(0x1176, None, "HANGUL JUNGSEONG A-O", 0x31, "Jamo"),
    c(0x1177, None, "HANGUL JUNGSEONG A-U", 0x31, "Jamo"),
    c(0x1178, None, "HANGUL JUNGSEONG YA-O", 0x31, "Jamo"),
    c(0x1179, None, "HANGUL JUNGSEONG YA-YO", 0x31, "Jamo"),
    c(0x117A, None, "HANGUL JUNGSEONG EO-O", 0x31, "Jamo"),
    c(0x117B, None, "HANGUL JUNGSEONG EO-U", 0x31, "Jamo"),
    c(0x117C, None, "HANGUL JUNGSEONG EO-EU", 0x31, "Jamo"),
    c(0x117D, None, "HANGUL JUNGSEONG YEO-O", 0x31, "Jamo"),
    c(0x117E, None, "HANGUL JUNGSEONG YEO-U", 0x31, "Jamo"),
    c(0x117F, None, "HANGUL JUNGSEONG O-EO", 0x31, "Jamo"),
    c(0x1180, None, "HANGUL JUNGSEONG O-E", 0x31, "Jamo"),
    c(0x1181, None, "HANGUL JUNGSEONG O-YE", 0x31, "Jamo"),
    c(0x1182, None, "HANGUL JUNGSEONG O-O", 0x31, "Jamo"),
    c(0x1183, None, "HANGUL JUNGSEONG O-U", 0x31, "Jamo"),
    c(0x1184, None, "HANGUL JUNGSEONG YO-YA", 0x31, "Jamo"),
    c(0x1185, None, "HANGUL JUNGSEONG YO-YAE", 0x31, "Jamo"),
    c(0x1186, None, "HANGUL JUNGSEONG YO-YEO", 0x31, "Jamo"),
    c(0x1187, None, "HANGUL JUNGSEONG YO-O", 0x31, "Jamo"),
    c(0x1188, None, "HANGUL JUNGSEONG YO-I", 0x31, "Jamo"),
    c(0x1189, None, "HANGUL JUNGSEONG U-A", 0x31, "Jamo"),
    c(0x118A, None, "HANGUL JUNGSEONG U-AE", 0x31, "Jamo"),
    c(0x118B, None, "HANGUL JUNGSEONG U-EO-EU", 0x31, "Jamo"),
    c(0x118C, None, "HANGUL JUNGSEONG U-YE", 0x31, "Jamo"),
    c(0x118D, None, "HANGUL JUNGSEONG U-U", 0x31, "Jamo"),
    c(0x118E, None, "HANGUL JUNGSEONG YU-A", 0x31, "Jamo"),
    c(0x118F, None, "HANGUL JUNGSEONG YU-EO", 0x31, "Jamo"),
    c(0x1190, None, "HANGUL JUNGSEONG YU-E", 0x31, "Jamo"),
    c(0x1191, None, "HANGUL JUNGSEONG YU-YEO", 0x31, "Jamo"),
    c(0x1192, None, "HANGUL JUNGSEONG YU-YE", 0x31, "Jamo"),
    c(0x1193, None, "HANGUL JUNGSEONG YU-U", 0x31, "Jamo"),
    c(0x1194, None, "HANGUL JUNGSEONG YU-I", 0x31, "Jamo"),
    c(0x1195, None, "HANGUL JUNGSEONG EU-U", 0x31, "Jamo"),
    c(0x1196, None, "HANGUL JUNGSEONG EU-EU", 0x31, "Jamo"),
    c(0x1197, None, "HANGUL JUNGSEONG YI-U", 0x31, "Jamo"),
    c(0x1198, None, "HANGUL JUNGSEONG I-A", 0x31, "Jamo"),
    c(0x1199, None, "HANGUL JUNGSEONG I-YA", 0x31, "Jamo"),
    c(0x119A, None, "HANGUL JUNGSEONG I-O", 0x31, "Jamo"),
    c(0x119B, None, "HANGUL JUNGSEONG I-U", 0x31, "Jamo"),
    c(0x119C, None, "HANGUL JUNGSEONG I-EU", 0x31, "Jamo"),
    c(0x119D, None, "HANGUL JUNGSEONG I-ARAEA", 0x31, "Jamo"),
    c(0x119E, None, "HANGUL JUNGSEONG ARAEA", 0x31, "Jamo"),
    c(0x119F, None, "HANGUL JUNGSEONG ARAEA-EO", 0x31, "Jamo"),
    c(0x11A0, None, "HANGUL JUNGSEONG ARAEA-U", 0x31, "Jamo"),
    c(0x11A1, None, "HANGUL JUNGSEONG ARAEA-I", 0x31, "Jamo"),
    c(0x11A2, None, "HANGUL JUNGSEONG SSANGARAEA", 0x31, "Jamo"),
    c(0x11A3, None, "HANGUL JUNGSEONG A-EU", 0x31, "Jamo"),
    c(0x11A4, None, "HANGUL JUNGSEONG YA-U", 0x31, "Jamo"),
    c(0x11A5, None, "HANGUL JUNGSEONG YEO-YA", 0x31, "Jamo"),
    c(0x11A6, None, "HANGUL JUNGSEONG O-YA", 0x31, "Jamo"),
    c(0x11A7, None, "HANGUL JUNGSEONG O-YAE", 0x31, "Jamo"),
    c(0x11A8, None, "HANGUL JONGSEONG KIYEOK", 0x31, "Jamo"),
    c(0x11A9, None, "HANGUL JONGSEONG SSANGKIYEOK", 0x31, "Jamo"),
    c(0x11AA, None, "HANGUL JONGSEONG KIYEOK-SIOS", 0x31, "Jamo"),
    c(0x11AB, None, "HANGUL JONGSEONG NIEUN", 0x31, "Jamo"),
    c(0x11AC, None, "HANGUL JONGSEONG NIEUN-CIEUC", 0x31, "Jamo"),
    c(0x11AD, None, "HANGUL JONGSEONG NIEUN-HIEUH", 0x31, "Jamo"),
    c(0x11AE, None, "HANGUL JONGSEONG TIKEUT", 0x31, "Jamo"),
    c(0x11AF, None, "HANGUL JONGSEONG RIEUL", 0x31, "Jamo"),
    c(0x11B0, None, "HANGUL JONGSEONG RIEUL-KIYEOK", 0x31, "Jamo"),
    c(0x11B1, None, "HANGUL JONGSEONG RIEUL-MIEUM", 0x31, "Jamo"),
    c(0x11B2, None, "HANGUL JONGSEONG RIEUL-PIEUP", 0x31, "Jamo"),
    c(0x11B3, None, "HANGUL JONGSEONG RIEUL-SIOS", 0x31, "Jamo"),
    c(0x11B4, None, "HANGUL JONGSEONG RIEUL-THIEUTH", 0x31, "Jamo"),
    c(0x11B5, None, "HANGUL JONGSEONG RIEUL-PHIEUPH", 0x31, "Jamo"),
    c(0x11B6, None, "HANGUL JONGSEONG RIEUL-HIEUH", 0x31, "Jamo"),
    c(0x11B7, None, "HANGUL JONGSEONG MIEUM", 0x31, "Jamo"),
    c(0x11B8, None, "HANGUL JONGSEONG PIEUP", 0x31, "Jamo"),
    c(0x11B9, None, "HANGUL JONGSEONG PIEUP-SIOS", 0x31, "Jamo"),
    c(0x11BA, None, "HANGUL JONGSEONG SIOS", 0x31, "Jamo"),
    c(0x11BB, None, "HANGUL JONGSEONG SSANGSIOS", 0x31, "Jamo"),
    c(0x11BC, None, "HANGUL JONGSEONG IEUNG", 0x31, "Jamo"),
    c(0x11BD, None, "HANGUL JONGSEONG CIEUC", 0x31, "Jamo"),
    c(0x11BE, None, "HANGUL JONGSEONG CHIEUCH", 0x31, "Jamo"),
    c(0x11BF, None, "HANGUL JONGSEONG KHIEUKH", 0x31, "Jamo"),
    c(0x11C0, None, "HANGUL JONGSEONG THIEUTH", 0x31, "Jamo"),
    c(0x11C1, None, "HANGUL JONGSEONG PHIEUPH", 0x31, "Jamo"),
    c(0x11C2, None, "HANGUL JONGSEONG HIEUH", 0x31, "Jamo"),
    c(0x11C3, None, "HANGUL JONGSEONG KIYEOK-RIEUL", 0x31, "Jamo"),
    c(0x11C4, None, "HANGUL JONGSEONG KIYEOK-SIOS-KIYEOK", 0x31, "Jamo"),
    c(0x11C5, None, "HANGUL JONGSEONG NIEUN-KIYEOK", 0x31, "Jamo"),
    c(0x11C6, None, "HANGUL JONGSEONG NIEUN-TIKEUT", 0x31, "Jamo"),
    c(0x11C7, None, "HANGUL JONGSEONG NIEUN-SIOS", 0x31, "Jamo"),
    c(0x11C8, None, "HANGUL JONGSEONG NIEUN-PANSIOS", 0x31, "Jamo"),
    c(0x11C9, None, "HANGUL JONGSEONG NIEUN-THIEUTH", 0x31, "Jamo"),
    c(0x11CA, None, "HANGUL JONGSEONG TIKEUT-KIYEOK", 0x31, "Jamo"),
    c(0x11CB, None, "HANGUL JONGSEONG TIKEUT-RIEUL", 0x31, "Jamo"),
    c(0x11CC, None, "HANGUL JONGSEONG RIEUL-KIYEOK-SIOS", 0x31, "Jamo"),
    c(0x11CD, None, "HANGUL JONGSEONG RIEUL-NIEUN", 0x31, "Jamo"),
    c(0x11CE, None, "HANGUL JONGSEONG RIEUL-TIKEUT", 0x31, "Jamo"),
    c(0x11CF, None, "HANGUL JONGSEONG RIEUL-TIKEUT-HIEUH", 0x31, "Jamo"),
    c(0x11D0, None, "HANGUL JONGSEONG SSANGRIEUL", 0x31, "Jamo"),
    c(0x11D1, None, "HANGUL JONGSEONG RIEUL-MIEUM-KIYEOK", 0x31, "Jamo"),
    c(0x11D2, None, "HANGUL JONGSEONG RIEUL-MIEUM-SIOS", 0x31, "Jamo"),
    c(0x11D3, None, "HANGUL JONGSEONG RIEUL-PIEUP-SIOS", 0x31, "Jamo"),
    c(0x11D4, None, "HANGUL JONGSEONG RIEUL-PIEUP-HIEUH", 0x31, "Jamo"),
    c(0x11D5, None, "HANGUL JONGSEONG RIEUL-KAPYEOUNPIEUP", 0x31, "Jamo"),
    c(0x11D6, None, "HANGUL JONGSEONG RIEUL-SSANGSIOS", 0x31, "Jamo"),
    c(0x11D7, None, "HANGUL JONGSEONG RIEUL-PANSIOS", 0x31, "Jamo"),
    c(0x11D8, None, "HANGUL JONGSEONG RIEUL-KHIEUKH", 0x31, "Jamo"),
    c(0x11D9, None, "HANGUL JONGSEONG RIEUL-YEORINHIEUH", 0x31, "Jamo"),
    c(0x11DA, None, "HANGUL JONGSEONG MIEUM-KIYEOK", 0x31, "Jamo"),
    c(0x11DB, None, "HANGUL JONGSEONG MIEUM-RIEUL", 0x31, "Jamo"),
    c(0x11DC, None, "HANGUL JONGSEONG MIEUM-PIEUP", 0x31, "Jamo"),
    c(0x11DD, None, "HANGUL JONGSEONG MIEUM-SIOS", 0x31, "Jamo"),
    c(0x11DE, None, "HANGUL JONGSEONG MIEUM-SSANGSIOS", 0x31, "Jamo"),
    c(0x11DF, None, "HANGUL JONGSEONG MIEUM-PANSIOS", 0x31, "Jamo"),
    c(0x11E0, None, "HANGUL JONGSEONG MIEUM-CHIEUCH", 0x31, "Jamo"),
    c(0x11E1, None, "HANGUL JONGSEONG MIEUM-HIEUH", 0x31, "Jamo"),
    c(0x11E2, None, "HANGUL JONGSEONG KAPYEOUNMIEUM", 0x31, "Jamo"),
    c(0x11E3, None, "HANGUL JONGSEONG PIEUP-RIEUL", 0x31, "Jamo"),
    c(0x11E4, None, "HANGUL JONGSEONG PIEUP-PHIEUPH", 0x31, "Jamo"),
    c(0x11E5, None, "HANGUL JONGSEONG PIEUP-HIEUH", 0x31, "Jamo"),
    c(0x11E6, None, "HANGUL JONGSEONG KAPYEOUNPIEUP", 0x31, "Jamo"),
    c(0x11E7, None, "HANGUL JONGSEONG SIOS-KIYEOK", 0x31, "Jamo"),
    c(0x11E8, None, "HANGUL JONGSEONG SIOS-TIKEUT", 0x31, "Jamo"),
    c(0x11E9, None, "HANGUL JONGSEONG SIOS-RIEUL", 0x31, "Jamo"),
    c(0x11EA, None, "HANGUL JONGSEONG SIOS-PIEUP", 0x31, "Jamo"),
    c(0x11EB, None, "HANGUL JONGSEONG PANSIOS", 0x31, "Jamo"),
    c(0x11EC, None, "HANGUL JONGSEONG YESIEUNG-KIYEOK", 0x31, "Jamo"),
    c(0x11ED, None, "HANGUL JONGSEONG YESIEUNG-SSANGKIYEOK", 0x31, "Jamo"),
    c(0x11EE, None, "HANGUL JONGSEONG SSANGYESIEUNG", 0x31, "Jamo"),
    c(0x11EF, None, "HANGUL JONGSEONG YESIEUNG-KHIEUKH", 0x31, "Jamo"),
    c(0x11F0, None, "HANGUL JONGSEONG YESIEUNG", 0x31, "Jamo"),
    c(0x11F1, None, "HANGUL JONGSEONG YESIEUNG-SIOS", 0x31, "Jamo"),
    c(0x11F2, None, "HANGUL JONGSEONG YESIEUNG-PANSIOS", 0x31, "Jamo"),
    c(0x11F3, None, "HANGUL JONGSEONG PHIEUPH-PIEUP", 0x31, "Jamo"),
    c(0x11F4, None, "HANGUL JONGSEONG KAPYEOUNPHIEUPH", 0x31, "Jamo"),
    c(0x11F5, None, "HANGUL JONGSEONG HIEUH-NIEUN", 0x31, "Jamo"),
    c(0x11F6, None, "HANGUL JONGSEONG HIEUH-RIEUL", 0x31, "Jamo"),
    c(0x11F7, None, "HANGUL JONGSEONG HIEUH-MIEUM", 0x31, "Jamo"),
    c(0x11F8, None, "HANGUL JONGSEONG HIEUH-PIEUP", 0x31, "Jamo"),
    c(0x11F9, None, "HANGUL JONGSEONG YEORINHIEUH", 0x31, "Jamo"),
    c(0x11FA, None, "HANGUL JONGSEONG KIYEOK-NIEUN", 0x31, "Jamo"),
    c(0x11FB, None, "HANGUL JONGSEONG KIYEOK-PIEUP", 0x31, "Jamo"),
    c(0x11FC, None, "HANGUL JONGSEONG KIYEOK-CHIEUCH", 0x31, "Jamo"),
    c(0x11FD, None, "HANGUL JONGSEONG KIYEOK-KHIEUKH", 0x31, "Jamo"),
    c(0x11FE, None, "HANGUL JONGSEONG KIYEOK-HIEUH", 0x31, "Jamo"),
    c(0x11FF, None, "HANGUL JONGSEONG SSANGNIEUN", 0x31, "Jamo"),
    c(0x1200, None, "ETHIOPIC SYLLABLE HA", 0x31, "Ethiopic"),
    c(0x1201, None, "ETHIOPIC SYLLABLE HU", 0x31, "Ethiopic"),
    c(0x1202, None, "ETHIOPIC SYLLABLE HI", 0x31, "Ethiopic"),
    c(0x1203, None, "ETHIOPIC SYLLABLE HAA", 0x31, "Ethiopic"),
    c(0x1204, None, "ETHIOPIC SYLLABLE HEE", 0x31, "Ethiopic"),
    c(0x1205, None, "ETHIOPIC SYLLABLE HE", 0x31, "Ethiopic"),
    c(0x1206, None, "ETHIOPIC SYLLABLE HO", 0x31, "Ethiopic"),
    c(0x1207, None, "ETHIOPIC SYLLABLE HOA", 0x31, "Ethiopic"),
    c(0x1208, None, "ETHIOPIC SYLLABLE LA", 0x31, "Ethiopic"),
    c(0x1209, None, "ETHIOPIC SYLLABLE LU", 0x31, "Ethiopic"),
    c(0x120A, None, "ETHIOPIC SYLLABLE LI", 0x31, "Ethiopic"),
    c(0x120B, None, "ETHIOPIC SYLLABLE LAA", 0x31, "Ethiopic"),
    c(0x120C, None, "ETHIOPIC SYLLABLE LEE", 0x31, "Ethiopic"),
    c(0x120D, None, "ETHIOPIC SYLLABLE LE", 0x31, "Ethiopic"),
    c(0x120E, None, "ETHIOPIC SYLLABLE LO", 0x31, "Ethiopic"),
    c(0x120F, None, "ETHIOPIC SYLLABLE LWA", 0x31, "Ethiopic"),
    c(0x1210, None, "ETHIOPIC SYLLABLE HHA", 0x31, "Ethiopic"),
    c(0x1211, None, "ETHIOPIC SYLLABLE HHU", 0x31, "Ethiopic"),
    c(0x1212, None, "ETHIOPIC SYLLABLE HHI", 0x31, "Ethiopic"),
    c(0x1213, None, "ETHIOPIC SYLLABLE HHAA", 0x31, "Ethiopic"),
    c(0x1214, None, "ETHIOPIC SYLLABLE HHEE", 0x31, "Ethiopic"),
    c(0x1215, None, "ETHIOPIC SYLLABLE HHE", 0x31, "Ethiopic"),
    c(0x1216, None, "ETHIOPIC SYLLABLE HHO", 0x31, "Ethiopic"),
    c(0x1217, None, "ETHIOPIC SYLLABLE HHWA", 0x31, "Ethiopic"),
    c(0x1218, None, "ETHIOPIC SYLLABLE MA", 0x31, "Ethiopic"),
    c(0x1219, None, "ETHIOPIC SYLLABLE MU", 0x31, "Ethiopic"),
    c(0x121A, None, "ETHIOPIC SYLLABLE MI", 0x31, "Ethiopic"),
    c(0x121B, None, "ETHIOPIC SYLLABLE MAA", 0x31, "Ethiopic"),
    c(0x121C, None, "ETHIOPIC SYLLABLE MEE", 0x31, "Ethiopic"),
    c(0x121D, None, "ETHIOPIC SYLLABLE ME", 0x31, "Ethiopic"),
    c(0x121E, None, "ETHIOPIC SYLLABLE MO", 0x31, "Ethiopic"),
    c(0x121F, None, "ETHIOPIC SYLLABLE MWA", 0x31, "Ethiopic"),
    c(0x1220, None, "ETHIOPIC SYLLABLE SZA", 0x31, "Ethiopic"),
    c(0x1221, None, "ETHIOPIC SYLLABLE SZU", 0x31, "Ethiopic"),
    c(0x1222, None, "ETHIOPIC SYLLABLE SZI", 0x31, "Ethiopic"),
    c(0x1223, None, "ETHIOPIC SYLLABLE SZAA", 0x31, "Ethiopic"),
    c(0x1224, None, "ETHIOPIC SYLLABLE SZEE", 0x31, "Ethiopic"),
    c(0x1225, None, "ETHIOPIC SYLLABLE SZE", 0x31, "Ethiopic"),
    c(0x1226, None, "ETHIOPIC SYLLABLE SZO", 0x31, "Ethiopic"),
    c(0x1227, None, "ETHIOPIC SYLLABLE SZWA", 0x31, "Ethiopic"),
    c(0x1228, None, "ETHIOPIC SYLLABLE RA", 0x31, "Ethiopic"),
    c(0x1229, None, "ETHIOPIC SYLLABLE RU", 0x31, "Ethiopic"),
    c(0x122A, None, "ETHIOPIC SYLLABLE RI", 0x31, "Ethiopic"),
    c(0x122B, None, "ETHIOPIC SYLLABLE RAA", 0x31, "Ethiopic"),
    c(0x122C, None, "ETHIOPIC SYLLABLE REE", 0x31, "Ethiopic"),
    c(0x122D, None, "ETHIOPIC SYLLABLE RE", 0x31, "Ethiopic"),
    c(0x122E, None, "ETHIOPIC SYLLABLE RO", 0x31, "Ethiopic"),
    c(0x122F, None, "ETHIOPIC SYLLABLE RWA", 0x31, "Ethiopic"),
    c(0x1230, None, "ETHIOPIC SYLLABLE SA", 0x31, "Ethiopic"),
    c(0x1231, None, "ETHIOPIC SYLLABLE SU", 0x31, "Ethiopic"),
    c(0x1232, None, "ETHIOPIC SYLLABLE SI", 0x31, "Ethiopic"),
    c(0x1233, None, "ETHIOPIC SYLLABLE SAA", 0x31, "Ethiopic"),
    c(0x1234, None, "ETHIOPIC SYLLABLE SEE", 0x31, "Ethiopic"),
    c(0x1235, None, "ETHIOPIC SYLLABLE SE", 0x31, "Ethiopic"),
    c(0x1236, None, "ETHIOPIC SYLLABLE SO", 0x31, "Ethiopic"),
    c(0x1237, None, "ETHIOPIC SYLLABLE SWA", 0x31, "Ethiopic"),
    c(0x1238, None, "ETHIOPIC SYLLABLE SHA", 0x31, "Ethiopic"),
    c(0x1239, None, "ETHIOPIC SYLLABLE SHU", 0x31, "Ethiopic"),
    c(0x123A, None, "ETHIOPIC SYLLABLE SHI", 0x31, "Ethiopic"),
    c(0x123B, None, "ETHIOPIC SYLLABLE SHAA", 0x31, "Ethiopic"),
    c(0x123C, None, "ETHIOPIC SYLLABLE SHEE", 0x31, "Ethiopic"),
    c(0x123D, None, "ETHIOPIC SYLLABLE SHE", 0x31, "Ethiopic"),
    c(0x123E, None, "ETHIOPIC SYLLABLE SHO", 0x31, "Ethiopic"),
    c(0x123F, None, "ETHIOPIC SYLLABLE SHWA", 0x31, "Ethiopic"),
    c(0x1240, None, "ETHIOPIC SYLLABLE QA", 0x31, "Ethiopic"),
    c(0x1241, None, "ETHIOPIC SYLLABLE QU", 0x31, "Ethiopic"),
    c(0x1242, None, "ETHIOPIC SYLLABLE QI", 0x31, "Ethiopic"),
    c(0x1243, None, "ETHIOPIC SYLLABLE QAA", 0x31, "Ethiopic"),
    c(0x1244, None, "ETHIOPIC SYLLABLE QEE", 0x31, "Ethiopic"),
    c(0x1245, None, "ETHIOPIC SYLLABLE QE", 0x31, "Ethiopic"),
    c(0x1246, None, "ETHIOPIC SYLLABLE QO", 0x31, "Ethiopic"),
    c(0x1247, None, "ETHIOPIC SYLLABLE QOA", 0x31, "Ethiopic"),
    c(0x1248, None, "ETHIOPIC SYLLABLE QWA", 0x31, "Ethiopic"),
    c(0x124A, None, "ETHIOPIC SYLLABLE QWI", 0x31, "Ethiopic"),
    c(0x124B, None, "ETHIOPIC SYLLABLE QWAA", 0x31, "Ethiopic"),
    c(0x124C, None, "ETHIOPIC SYLLABLE QWEE", 0x31, "Ethiopic"),
    c(0x124D, None, "ETHIOPIC SYLLABLE QWE", 0x31, "Ethiopic"),
    c(0x1250, None, "ETHIOPIC SYLLABLE QHA", 0x31, "Ethiopic"),
    c(0x1251, None, "ETHIOPIC SYLLABLE QHU", 0x31, "Ethiopic"),
    c(0x1252, None, "ETHIOPIC SYLLABLE QHI", 0x31, "Ethiopic"),
    c(0x1253, None, "ETHIOPIC SYLLABLE QHAA", 0x31, "Ethiopic"),
    c(0x1254, None, "ETHIOPIC SYLLABLE QHEE", 0x31, "Ethiopic"),
    c(0x1255, None, "ETHIOPIC SYLLABLE QHE", 0x31, "Ethiopic"),
    c(0x1256, None, "ETHIOPIC SYLLABLE QHO", 0x31, "Ethiopic"),
    c(0x1258, None, "ETHIOPIC SYLLABLE QHWA", 0x31, "Ethiopic"),
    c(0x125A, None, "ETHIOPIC SYLLABLE QHWI", 0x31, "Ethiopic"),
    c(0x125B, None, "ETHIOPIC SYLLABLE QHWAA", 0x31, "Ethiopic"),
    c(0x125C, None, "ETHIOPIC SYLLABLE QHWEE", 0x31, "Ethiopic"),
    c(0x125D, None, "ETHIOPIC SYLLABLE QHWE", 0x31, "Ethiopic"),
    c(0x1260, None, "ETHIOPIC SYLLABLE BA", 0x31, "Ethiopic"),
    c(0x1261, None, "ETHIOPIC SYLLABLE BU", 0x31, "Ethiopic"),
    c(0x1262, None, "ETHIOPIC SYLLABLE BI", 0x31, "Ethiopic"),
    c(0x1263, None, "ETHIOPIC SYLLABLE BAA", 0x31, "Ethiopic"),
    c(0x1264, None, "ETHIOPIC SYLLABLE BEE", 0x31, "Ethiopic"),
    c(0x1265, None, "ETHIOPIC SYLLABLE BE", 0x31, "Ethiopic"),
    c(0x1266, None, "ETHIOPIC SYLLABLE BO", 0x31, "Ethiopic"),
    c(0x1267, None, "ETHIOPIC SYLLABLE BWA", 0x31, "Ethiopic"),
    c(0x1268, None, "ETHIOPIC SYLLABLE VA", 0x31, "Ethiopic"),
    c(0x1269, None, "ETHIOPIC SYLLABLE VU", 0x31, "Ethiopic"),
    c(0x126A, None, "ETHIOPIC SYLLABLE VI", 0x31, "Ethiopic"),
    c(0x126B, None, "ETHIOPIC SYLLABLE VAA", 0x31, "Ethiopic"),
    c(0x126C, None, "ETHIOPIC SYLLABLE VEE", 0x31, "Ethiopic"),
    c(0x126D, None, "ETHIOPIC SYLLABLE VE", 0x31, "Ethiopic"),
    c(0x126E, None, "ETHIOPIC SYLLABLE VO", 0x31, "Ethiopic"),
    c(0x126F, None, "ETHIOPIC SYLLABLE VWA", 0x31, "Ethiopic"),
    c(0x1270, None, "ETHIOPIC SYLLABLE TA", 0x31, "Ethiopic"),
    c(0x1271, None, "ETHIOPIC SYLLABLE TU", 0x31, "Ethiopic"),
    c(0x1272, None, "ETHIOPIC SYLLABLE TI", 0x31, "Ethiopic"),
    c(0x1273, None, "ETHIOPIC SYLLABLE TAA", 0x31, "Ethiopic"),
    c(0x1274, None, "ETHIOPIC SYLLABLE TEE", 0x31, "Ethiopic"),
    c(0x1275, None, "ETHIOPIC SYLLABLE TE", 0x31, "Ethiopic"),
    c(0x1276, None, "ETHIOPIC SYLLABLE TO", 0x31, "Ethiopic"),
    c(0x1277, None, "ETHIOPIC SYLLABLE TWA", 0x31, "Ethiopic"),
    c(0x1278, None, "ETHIOPIC SYLLABLE CA", 0x31, "Ethiopic"),
    c(0x1279, None, "ETHIOPIC SYLLABLE CU", 0x31, "Ethiopic"),
    c(0x127A, None, "ETHIOPIC SYLLABLE CI", 0x31, "Ethiopic"),
    c(0x127B, None, "ETHIOPIC SYLLABLE CAA", 0x31, "Ethiopic"),
    c(0x127C, None, "ETHIOPIC SYLLABLE CEE", 0x31, "Ethiopic"),
    c(0x127D, None, "ETHIOPIC SYLLABLE CE", 0x31, "Ethiopic"),
    c(0x127E, None, "ETHIOPIC SYLLABLE CO", 0x31, "Ethiopic"),
    c(0x127F, None, "ETHIOPIC SYLLABLE CWA", 0x31, "Ethiopic"),
    c(0x1280, None, "ETHIOPIC SYLLABLE XA", 0x31, "Ethiopic"),
    c(0x1281, None, "ETHIOPIC SYLLABLE XU", 0x31, "Ethiopic"),
    c(0x1282, None, "ETHIOPIC SYLLABLE XI", 0x31, "Ethiopic"),
    c(0x1283, None, "ETHIOPIC SYLLABLE XAA", 0x31, "Ethiopic"),
    c(0x1284, None, "ETHIOPIC SYLLABLE XEE", 0x31, "Ethiopic"),
    c(0x1285, None, "ETHIOPIC SYLLABLE XE", 0x31, "Ethiopic"),
    c(0x1286, None, "ETHIOPIC SYLLABLE XO", 0x31, "Ethiopic"),
    c(0x1287, None, "ETHIOPIC SYLLABLE XOA", 0x31, "Ethiopic"),
    c(0x1288, None, "ETHIOPIC SYLLABLE XWA", 0x31, "Ethiopic"),
    c(0x128A, None, "ETHIOPIC SYLLABLE XWI", 0x31, "Ethiopic"),
    c(0x128B, None, "ETHIOPIC SYLLABLE XWAA", 0x31, "Ethiopic"),
    c(0x128C, None, "ETHIOPIC SYLLABLE XWEE", 0x31, "Ethiopic"),
    c(0x128D, None, "ETHIOPIC SYLLABLE XWE", 0x31, "Ethiopic"),
    c(0x1290, None, "ETHIOPIC SYLLABLE NA", 0x31, "Ethiopic"),
    c(0x1291, None, "ETHIOPIC SYLLABLE NU", 0x31, "Ethiopic"),
    c(0x1292, None, "ETHIOPIC SYLLABLE NI", 0x31, "Ethiopic"),
    c(0x1293, None, "ETHIOPIC SYLLABLE NAA", 0x31, "Ethiopic"),
    c(0x1294, None, "ETHIOPIC SYLLABLE NEE", 0x31, "Ethiopic"),
    c(0x1295, None, "ETHIOPIC SYLLABLE NE", 0x31, "Ethiopic"),
    c(0x1296, None, "ETHIOPIC SYLLABLE NO", 0x31, "Ethiopic"),
    c(0x1297, None, "ETHIOPIC SYLLABLE NWA", 0x31, "Ethiopic"),
    c(0x1298, None, "ETHIOPIC SYLLABLE NYA", 0x31, "Ethiopic"),
    c(0x1299, None, "ETHIOPIC SYLLABLE NYU", 0x31, "Ethiopic"),
    c(0x129A, None, "ETHIOPIC SYLLABLE NYI", 0x31, "Ethiopic"),
    c(0x129B, None, "ETHIOPIC SYLLABLE NYAA", 0x31, "Ethiopic"),
    c(0x129C, None, "ETHIOPIC SYLLABLE NYEE", 0x31, "Ethiopic"),
    c(0x129D, None, "ETHIOPIC SYLLABLE NYE", 0x31, "Ethiopic"),
    c(0x129E, None, "ETHIOPIC SYLLABLE NYO", 0x31, "Ethiopic"),
    c(0x129F, None, "ETHIOPIC SYLLABLE NYWA", 0x31, "Ethiopic"),
    c(0x12A0, None, "ETHIOPIC SYLLABLE GLOTTAL A", 0x31, "Ethiopic"),
    c(0x12A1, None, "ETHIOPIC SYLLABLE GLOTTAL U", 0x31, "Ethiopic"),
    c(0x12A2, None, "ETHIOPIC SYLLABLE GLOTTAL I", 0x31, "Ethiopic"),
    c(0x12A3, None, "ETHIOPIC SYLLABLE GLOTTAL AA", 0x31, "Ethiopic"),
    c(0x12A4, None, "ETHIOPIC SYLLABLE GLOTTAL EE", 0x31, "Ethiopic"),
    c(0x12A5, None, "ETHIOPIC SYLLABLE GLOTTAL E", 0x31, "Ethiopic"),
    c(0x12A6, None, "ETHIOPIC SYLLABLE GLOTTAL O", 0x31, "Ethiopic"),
    c(0x12A7, None, "ETHIOPIC SYLLABLE GLOTTAL WA", 0x31, "Ethiopic"),
    c(0x12A8, None, "ETHIOPIC SYLLABLE KA", 0x31, "Ethiopic"),
    c(0x12A9, None, "ETHIOPIC SYLLABLE KU", 0x31, "Ethiopic"),
    c(0x12AA, None, "ETHIOPIC SYLLABLE KI", 0x31, "Ethiopic"),
    c(0x12AB, None, "ETHIOPIC SYLLABLE KAA", 0x31, "Ethiopic"),
    c(0x12AC, None, "ETHIOPIC SYLLABLE KEE", 0x31, "Ethiopic"),
    c(0x12AD, None, "ETHIOPIC SYLLABLE KE", 0x31, "Ethiopic"),
    c(0x12AE, None, "ETHIOPIC SYLLABLE KO", 0x31, "Ethiopic"),
    c(0x12AF, None, "ETHIOPIC SYLLABLE KOA", 0x31, "Ethiopic"),
    c(0x12B0, None, "ETHIOPIC SYLLABLE KWA", 0x31, "Ethiopic"),
    c(0x12B2, None, "ETHIOPIC SYLLABLE KWI", 0x31, "Ethiopic"),
    c(0x12B3, None, "ETHIOPIC SYLLABLE KWAA", 0x31, "Ethiopic"),
    c(0x12B4, None, "ETHIOPIC SYLLABLE KWEE", 0x31, "Ethiopic"),
    c(0x12B5, None, "ETHIOPIC SYLLABLE KWE", 0x31, "Ethiopic"),
    c(0x12B8, None, "ETHIOPIC SYLLABLE KXA", 0x31, "Ethiopic"),
    c(0x12B9, None, "ETHIOPIC SYLLABLE KXU", 0x31, "Ethiopic"),
    c(0x12BA, None, "ETHIOPIC SYLLABLE KXI", 0x31, "Ethiopic"),
    c(0x12BB, None, "ETHIOPIC SYLLABLE KXAA", 0x31, "Ethiopic"),
    c(0x12BC, None, "ETHIOPIC SYLLABLE KXEE", 0x31, "Ethiopic"),
    c(0x12BD, None, "ETHIOPIC SYLLABLE KXE", 0x31, "Ethiopic"),
    c(0x12BE, None, "ETHIOPIC SYLLABLE KXO", 0x31, "Ethiopic"),
    c(0x12C0, None, "ETHIOPIC SYLLABLE KXWA", 0x31, "Ethiopic"),
    c(0x12C2, None, "ETHIOPIC SYLLABLE KXWI", 0x31, "Ethiopic"),
    c(0x12C3, None, "ETHIOPIC SYLLABLE KXWAA", 0x31, "Ethiopic"),
    c(0x12C4, None, "ETHIOPIC SYLLABLE KXWEE", 0x31, "Ethiopic"),
    c(0x12C5, None, "ETHIOPIC SYLLABLE KXWE", 0x31, "Ethiopic"),
    c(0x12C8, None, "ETHIOPIC SYLLABLE WA", 0x31, "Ethiopic"),
    c(0x12C9, None, "ETHIOPIC SYLLABLE WU", 0x31, "Ethiopic"),
    c(0x12CA, None, "ETHIOPIC SYLLABLE WI", 0x31, "Ethiopic"),
    c(0x12CB, None, "ETHIOPIC SYLLABLE WAA", 0x31, "Ethiopic"),
    c(0x12CC, None, "ETHIOPIC SYLLABLE WEE", 0x31, "Ethiopic"),
    c(0x12CD, None, "ETHIOPIC SYLLABLE WE", 0x31, "Ethiopic"),
    c(0x12CE, None, "ETHIOPIC SYLLABLE WO", 0x31, "Ethiopic"),
    c(0x12CF, None, "ETHIOPIC SYLLABLE WOA", 0x31, "Ethiopic"),
    c(0x12D0, None, "ETHIOPIC SYLLABLE PHARYNGEAL A", 0x31, "Ethiopic"),
    c(0x12D1, None, "ETHIOPIC SYLLABLE PHARYNGEAL U", 0x31, "Ethiopic"),
    c(0x12D2, None, "ETHIOPIC SYLLABLE PHARYNGEAL I", 0x31, "Ethiopic"),
    c(0x12D3, None, "ETHIOPIC SYLLABLE PHARYNGEAL AA", 0x31, "Ethiopic"),
    c(0x12D4, None, "ETHIOPIC SYLLABLE PHARYNGEAL EE", 0x31, "Ethiopic"),
    c(0x12D5, None, "ETHIOPIC SYLLABLE PHARYNGEAL E", 0x31, "Ethiopic"),
    c(0x12D6, None, "ETHIOPIC SYLLABLE PHARYNGEAL O", 0x31, "Ethiopic"),
    c(0x12D8, None, "ETHIOPIC SYLLABLE ZA", 0x31, "Ethiopic"),
    c(0x12D9, None, "ETHIOPIC SYLLABLE ZU", 0x31, "Ethiopic"),
    c(0x12DA, None, "ETHIOPIC SYLLABLE ZI", 0x31, "Ethiopic"),
    c(0x12DB, None, "ETHIOPIC SYLLABLE ZAA", 0x31, "Ethiopic"),
    c(0x12DC, None, "ETHIOPIC SYLLABLE ZEE", 0x31, "Ethiopic"),
    c(0x12DD, None, "ETHIOPIC SYLLABLE ZE", 0x31, "Ethiopic"),
    c(0x12DE, None, "ETHIOPIC SYLLABLE ZO", 0x31, "Ethiopic"),
    c(0x12DF, None, "ETHIOPIC SYLLABLE ZWA", 0x31, "Ethiopic"),
    c(0x12E0, None, "ETHIOPIC SYLLABLE ZHA", 0x31, "Ethiopic"),
    c(0x12E1, None, "ETHIOPIC SYLLABLE ZHU", 0x31, "Ethiopic"),
    c(0x12E2, None, "ETHIOPIC SYLLABLE ZHI", 0x31, "Ethiopic"),
    c(0x12E3, None, "ETHIOPIC SYLLABLE ZHAA", 0x31, "Ethiopic"),
    c(0x12E4, None, "ETHIOPIC SYLLABLE ZHEE", 0x31, "Ethiopic"),
    c(0x12E5, None, "ETHIOPIC SYLLABLE ZHE", 0x31, "Ethiopic"),
    c(0x12E6, None, "ETHIOPIC SYLLABLE ZHO", 0x31, "Ethiopic"),
    c(0x12E7, None, "ETHIOPIC SYLLABLE ZHWA", 0x31, "Ethiopic"),
    c(0x12E8, None, "ETHIOPIC SYLLABLE YA", 0x31, "Ethiopic"),
    c(0x12E9, None, "ETHIOPIC SYLLABLE YU", 0x31, "Ethiopic"),
    c(0x12EA, None, "ETHIOPIC SYLLABLE YI", 0x31, "Ethiopic"),
    c(0x12EB, None, "ETHIOPIC SYLLABLE YAA", 0x31, "Ethiopic"),
    c(0x12EC, None, "ETHIOPIC SYLLABLE YEE", 0x31, "Ethiopic"),
    c(0x12ED, None, "ETHIOPIC SYLLABLE YE", 0x31, "Ethiopic"),
    c(0x12EE, None, "ETHIOPIC SYLLABLE YO", 0x31, "Ethiopic"),
    c(0x12EF, None, "ETHIOPIC SYLLABLE YOA", 0x31, "Ethiopic"),
    c(0x12F0, None, "ETHIOPIC SYLLABLE DA", 0x31, "Ethiopic"),
    c(0x12F1, None, "ETHIOPIC SYLLABLE DU", 0x31, "Ethiopic"),
    c(0x12F2, None, "ETHIOPIC SYLLABLE DI", 0x31, "Ethiopic"),
    c(0x12F3, None, "ETHIOPIC SYLLABLE DAA", 0x31, "Ethiopic"),
    c(0x12F4, None, "ETHIOPIC SYLLABLE DEE", 0x31, "Ethiopic"),
    c(0x12F5, None, "ETHIOPIC SYLLABLE DE", 0x31, "Ethiopic"),
    c(0x12F6, None, "ETHIOPIC SYLLABLE DO", 0x31, "Ethiopic"),
    c(0x12F7, None, "ETHIOPIC SYLLABLE DWA", 0x31, "Ethiopic"),
    c(0x12F8, None, "ETHIOPIC SYLLABLE DDA", 0x31, "Ethiopic"),
    c(0x12F9, None, "ETHIOPIC SYLLABLE DDU", 0x31, "Ethiopic"),
    c(0x12FA, None, "ETHIOPIC SYLLABLE DDI", 0x31, "Ethiopic"),
    c(0x12FB, None, "ETHIOPIC SYLLABLE DDAA", 0x31, "Ethiopic"),
    c(0x12FC, None, "ETHIOPIC SYLLABLE DDEE", 0x31, "Ethiopic"),
    c(0x12FD, None, "ETHIOPIC SYLLABLE DDE", 0x31, "Ethiopic"),
    c(0x12FE, None, "ETHIOPIC SYLLABLE DDO", 0x31, "Ethiopic"),
    c(0x12FF, None, "ETHIOPIC SYLLABLE DDWA", 0x31, "Ethiopic"),
    c(0x1300, None, "ETHIOPIC SYLLABLE JA", 0x31, "Ethiopic"),
    c(0x1301, None, "ETHIOPIC SYLLABLE JU", 0x31, "Ethiopic"),
    c(0x1302, None, "ETHIOPIC SYLLABLE JI", 0x31, "Ethiopic"),
    c(0x1303, None, "ETHIOPIC SYLLABLE JAA", 0x31, "Ethiopic"),
    c(0x1304, None, "ETHIOPIC SYLLABLE JEE", 0x31, "Ethiopic"),
    c(0x1305, None, "ETHIOPIC SYLLABLE JE", 0x31, "Ethiopic"),
    c(0x1306, None, "ETHIOPIC SYLLABLE JO", 0x31, "Ethiopic"),
    c(0x1307, None, "ETHIOPIC SYLLABLE JWA", 0x31, "Ethiopic"),
    c(0x1308, None, "ETHIOPIC SYLLABLE GA", 0x31, "Ethiopic"),
    c(0x1309, None, "ETHIOPIC SYLLABLE GU", 0x31, "Ethiopic"),
    c(0x130A, None, "ETHIOPIC SYLLABLE GI", 0x31, "Ethiopic"),
    c(0x130B, None, "ETHIOPIC SYLLABLE GAA", 0x31, "Ethiopic"),
    c(0x130C, None, "ETHIOPIC SYLLABLE GEE", 0x31, "Ethiopic"),
    c(0x130D, None, "ETHIOPIC SYLLABLE GE", 0x31, "Ethiopic"),
    c(0x130E, None, "ETHIOPIC SYLLABLE GO", 0x31, "Ethiopic"),
    c(0x130F, None, "ETHIOPIC SYLLABLE GOA", 0x31, "Ethiopic"),
    c(0x1310, None, "ETHIOPIC SYLLABLE GWA", 0x31, "Ethiopic"),
    c(0x1312, None, "ETHIOPIC SYLLABLE GWI", 0x31, "Ethiopic"),
    c(0x1313, None, "ETHIOPIC SYLLABLE GWAA", 0x31, "Ethiopic"),
    c(0x1314, None, "ETHIOPIC SYLLABLE GWEE", 0x31, "Ethiopic"),
    c(0x1315, None, "ETHIOPIC SYLLABLE GWE", 0x31, "Ethiopic"),
    c(0x1318, None, "ETHIOPIC SYLLABLE GGA", 0x31, "Ethiopic"),
    c(0x1319, None, "ETHIOPIC SYLLABLE GGU", 0x31, "Ethiopic"),
    c(0x131A, None, "ETHIOPIC SYLLABLE GGI", 0x31, "Ethiopic"),
    c(0x131B, None, "ETHIOPIC SYLLABLE GGAA", 0x31, "Ethiopic"),
    c(0x131C, None, "ETHIOPIC SYLLABLE GGEE", 0x31, "Ethiopic"),
    c(0x131D, None, "ETHIOPIC SYLLABLE GGE", 0x31, "Ethiopic"),
    c(0x131E, None, "ETHIOPIC SYLLABLE GGO", 0x31, "Ethiopic"),
    c(0x131F, None, "ETHIOPIC SYLLABLE GGWAA", 0x31, "Ethiopic"),
    c(0x1320, None, "ETHIOPIC SYLLABLE THA", 0x31, "Ethiopic"),
    c(0x1321, None, "ETHIOPIC SYLLABLE THU", 0x31, "Ethiopic"),
    c(0x1322, None, "ETHIOPIC SYLLABLE THI", 0x31, "Ethiopic"),
    c(0x1323, None, "ETHIOPIC SYLLABLE THAA", 0x31, "Ethiopic"),
    c(0x1324, None, "ETHIOPIC SYLLABLE THEE", 0x31, "Ethiopic"),
    c(0x1325, None, "ETHIOPIC SYLLABLE THE", 0x31, "Ethiopic"),
    c(0x1326, None, "ETHIOPIC SYLLABLE THO", 0x31, "Ethiopic"),
    c(0x1327, None, "ETHIOPIC SYLLABLE THWA", 0x31, "Ethiopic"),
    c(0x1328, None, "ETHIOPIC SYLLABLE CHA", 0x31, "Ethiopic"),
    c(0x1329, None, "ETHIOPIC SYLLABLE CHU", 0x31, "Ethiopic"),
    c(0x132A, None, "ETHIOPIC SYLLABLE CHI", 0x31, "Ethiopic"),
    c(0x132B, None, "ETHIOPIC SYLLABLE CHAA", 0x31, "Ethiopic"),
    c(0x132C, None, "ETHIOPIC SYLLABLE CHEE", 0x31, "Ethiopic"),
    c(0x132D, None, "ETHIOPIC SYLLABLE CHE", 0x31, "Ethiopic"),
    c(0x132E, None, "ETHIOPIC SYLLABLE CHO", 0x31, "Ethiopic"),
    c(0x132F, None, "ETHIOPIC SYLLABLE CHWA", 0x31, "Ethiopic"),
    c(0x1330, None, "ETHIOPIC SYLLABLE PHA", 0x31, "Ethiopic"),
    c(0x1331, None, "ETHIOPIC SYLLABLE PHU", 0x31, "Ethiopic"),
    c(0x1332, None, "ETHIOPIC SYLLABLE PHI", 0x31, "Ethiopic"),
    c(0x1333, None, "ETHIOPIC SYLLABLE PHAA", 0x31, "Ethiopic"),
    c(0x1334, None, "ETHIOPIC SYLLABLE PHEE", 0x31, "Ethiopic"),
    c(0x1335, None, "ETHIOPIC SYLLABLE PHE", 0x31, "Ethiopic"),
    c(0x1336, None, "ETHIOPIC SYLLABLE PHO", 0x31, "Ethiopic"),
    c(0x1337, None, "ETHIOPIC SYLLABLE PHWA", 0x31, "Ethiopic"),
    c(0x1338, None, "ETHIOPIC SYLLABLE TSA", 0x31, "Ethiopic"),
    c(0x1339, None, "ETHIOPIC SYLLABLE TSU", 0x31, "Ethiopic"),
    c(0x133A, None, "ETHIOPIC SYLLABLE TSI", 0x31, "Ethiopic"),
    c(0x133B, None, "ETHIOPIC SYLLABLE TSAA", 0x31, "Ethiopic"),
    c(0x133C, None, "ETHIOPIC SYLLABLE TSEE", 0x31, "Ethiopic"),
    c(0x133D, None, "ETHIOPIC SYLLABLE TSE", 0x31, "Ethiopic"),
    c(0x133E, None, "ETHIOPIC SYLLABLE TSO", 0x31, "Ethiopic"),
    c(0x133F, None, "ETHIOPIC SYLLABLE TSWA", 0x31, "Ethiopic"),
    c(0x1340, None, "ETHIOPIC SYLLABLE TZA", 0x31, "Ethiopic"),
    c(0x1341, None, "ETHIOPIC SYLLABLE TZU", 0x31, "Ethiopic"),
    c(0x1342, None, "ETHIOPIC SYLLABLE TZI", 0x31, "Ethiopic"),
    c(0x1343, None, "ETHIOPIC SYLLABLE TZAA", 0x31, "Ethiopic"),
    c(0x1344, None, "ETHIOPIC SYLLABLE TZEE", 0x31, "Ethiopic"),
    c(0x1345, None, "ETHIOPIC SYLLABLE TZE", 0x31, "Ethiopic"),
    c(0x1346, None, "ETHIOPIC SYLLABLE TZO", 0x31, "Ethiopic"),
    c(0x1347, None, "ETHIOPIC SYLLABLE TZOA", 0x31, "Ethiopic"),
    c(0x1348, None, "ETHIOPIC SYLLABLE FA", 0x31, "Ethiopic"),
    c(0x1349, None, "ETHIOPIC SYLLABLE FU", 0x31, "Ethiopic"),
    c(0x134A, None, "ETHIOPIC SYLLABLE FI", 0x31, "Ethiopic"),
    c(0x134B, None, "ETHIOPIC SYLLABLE FAA", 0x31, "Ethiopic"),
    c(0x134C, None, "ETHIOPIC SYLLABLE FEE", 0x31, "Ethiopic"),
    c(0x134D, None, "ETHIOPIC SYLLABLE FE", 0x31, "Ethiopic"),
    c(0x134E, None, "ETHIOPIC SYLLABLE FO", 0x31, "Ethiopic"),
    c(0x134F, None, "ETHIOPIC SYLLABLE FWA", 0x31, "Ethiopic"),
    c(0x1350, None, "ETHIOPIC SYLLABLE PA", 0x31, "Ethiopic"),
    c(0x1351, None, "ETHIOPIC SYLLABLE PU", 0x31, "Ethiopic"),
    c(0x1352, None, "ETHIOPIC SYLLABLE PI", 0x31, "Ethiopic"),
    c(0x1353, None, "ETHIOPIC SYLLABLE PAA", 0x31, "Ethiopic"),
    c(0x1354, None, "ETHIOPIC SYLLABLE PEE", 0x31, "Ethiopic"),
    c(0x1355, None, "ETHIOPIC SYLLABLE PE", 0x31, "Ethiopic"),
    c(0x1356, None, "ETHIOPIC SYLLABLE PO", 0x31, "Ethiopic"),
    c(0x1357, None, "ETHIOPIC SYLLABLE PWA", 0x31, "Ethiopic"),
    c(0x1358, None, "ETHIOPIC SYLLABLE RYA", 0x31, "Ethiopic"),
    c(0x1359, None, "ETHIOPIC SYLLABLE MYA", 0x31, "Ethiopic"),
    c(0x135A, None, "ETHIOPIC SYLLABLE FYA", 0x31, "Ethiopic"),
    c(0x135D, None, "ETHIOPIC COMBINING GEMINATION AND VOWEL LENGTH MARK", 0x20, "Ethiopic"),
    c(0x135E, None, "ETHIOPIC COMBINING VOWEL LENGTH MARK", 0x20, "Ethiopic"),
    c(0x135F, None, "ETHIOPIC COMBINING GEMINATION MARK", 0x20, "Ethiopic"),
    c(0x1360, None, "ETHIOPIC SECTION MARK", 0x00, "Ethiopic"),
    c(0x1361, None, "ETHIOPIC WORDSPACE", 0x00, "Ethiopic"),
    c(0x1362, None, "ETHIOPIC FULL STOP", 0x00, "Ethiopic"),
    c(0x1363, None, "ETHIOPIC COMMA", 0x00, "Ethiopic"),
    c(0x1364, None, "ETHIOPIC SEMICOLON", 0x00, "Ethiopic"),
    c(0x1365, None, "ETHIOPIC COLON", 0x00, "Ethiopic"),
    c(0x1366, None, "ETHIOPIC PREFACE COLON", 0x00, "Ethiopic"),
    c(0x1367, None, "ETHIOPIC QUESTION MARK", 0x00, "Ethiopic"),
    c(0x1368, None, "ETHIOPIC PARAGRAPH SEPARATOR", 0x00, "Ethiopic"),
    c(0x1369, None, "ETHIOPIC DIGIT ONE", 0x20, "Ethiopic"),
    c(0x136A, None, "ETHIOPIC DIGIT TWO", 0x20, "Ethiopic"),
    c(0x136B, None, "ETHIOPIC DIGIT THREE", 0x20, "Ethiopic"),
    c(0x136C, None, "ETHIOPIC DIGIT FOUR", 0x20, "Ethiopic"),
    c(0x136D, None, "ETHIOPIC DIGIT FIVE", 0x20, "Ethiopic"),
    c(0x136E, None, "ETHIOPIC DIGIT SIX", 0x20, "Ethiopic"),
    c(0x136F, None, "ETHIOPIC DIGIT SEVEN", 0x20, "Ethiopic"),
    c(0x1370, None, "ETHIOPIC DIGIT EIGHT", 0x20, "Ethiopic"),
    c(0x1371, None, "ETHIOPIC DIGIT NINE", 0x20, "Ethiopic"),
    c(0x1372, None, "ETHIOPIC NUMBER TEN", 0x00, "Ethiopic"),
    c(0x1373, None, "ETHIOPIC NUMBER TWENTY", 0x00, "Ethiopic"),
    c(0x1374, None, "ETHIOPIC NUMBER THIRTY", 0x00, "Ethiopic"),
    c(0x1375, None, "ETHIOPIC NUMBER FORTY", 0x00, "Ethiopic"),
    c(0x1376, None, "ETHIOPIC NUMBER FIFTY", 0x00, "Ethiopic"),
    c(0x1377, None, "ETHIOPIC NUMBER SIXTY", 0x00, "Ethiopic"),
    c(0x1378, None, "ETHIOPIC NUMBER SEVENTY", 0x00, "Ethiopic"),
    c(0x1379, None, "ETHIOPIC NUMBER EIGHTY", 0x00, "Ethiopic"),
    c(0x137A, None, "ETHIOPIC NUMBER NINETY", 0x00, "Ethiopic"),
    c(0x137B, None, "ETHIOPIC NUMBER HUNDRED", 0x00, "Ethiopic"),
    c(0x137C, None, "ETHIOPIC NUMBER TEN THOUSAND", 0x00, "Ethiopic"),
    c(0x1380, None, "ETHIOPIC SYLLABLE SEBATBEIT MWA", 0x31, "Ethiopic_Sup"),
    c(0x1381, None, "ETHIOPIC SYLLABLE MWI", 0x31, "Ethiopic_Sup"),
    c(0x1382, None, "ETHIOPIC SYLLABLE MWEE", 0x31, "Ethiopic_Sup"),
    c(0x1383, None, "ETHIOPIC SYLLABLE MWE", 0x31, "Ethiopic_Sup"),
    c(0x1384, None, "ETHIOPIC SYLLABLE SEBATBEIT BWA", 0x31, "Ethiopic_Sup"),
    c(0x1385, None, "ETHIOPIC SYLLABLE BWI", 0x31, "Ethiopic_Sup"),
    c(0x1386, None, "ETHIOPIC SYLLABLE BWEE", 0x31, "Ethiopic_Sup"),
    c(0x1387, None, "ETHIOPIC SYLLABLE BWE", 0x31, "Ethiopic_Sup"),
    c(0x1388, None, "ETHIOPIC SYLLABLE SEBATBEIT FWA", 0x31, "Ethiopic_Sup"),
    c(0x1389, None, "ETHIOPIC SYLLABLE FWI", 0x31, "Ethiopic_Sup"),
    c(0x138A, None, "ETHIOPIC SYLLABLE FWEE", 0x31, "Ethiopic_Sup"),
    c(0x138B, None, "ETHIOPIC SYLLABLE FWE", 0x31, "Ethiopic_Sup"),
    c(0x138C, None, "ETHIOPIC SYLLABLE SEBATBEIT PWA", 0x31, "Ethiopic_Sup"),
    c(0x138D, None, "ETHIOPIC SYLLABLE PWI", 0x31, "Ethiopic_Sup"),
    c(0x138E, None, "ETHIOPIC SYLLABLE PWEE", 0x31, "Ethiopic_Sup"),
    c(0x138F, None, "ETHIOPIC SYLLABLE PWE", 0x31, "Ethiopic_Sup"),
    c(0x1390, None, "ETHIOPIC TONAL MARK YIZET", 0x00, "Ethiopic_Sup"),
    c(0x1391, None, "ETHIOPIC TONAL MARK DERET", 0x00, "Ethiopic_Sup"),
    c(0x1392, None, "ETHIOPIC TONAL MARK RIKRIK", 0x00, "Ethiopic_Sup"),
    c(0x1393, None, "ETHIOPIC TONAL MARK SHORT RIKRIK", 0x00, "Ethiopic_Sup"),
    c(0x1394, None, "ETHIOPIC TONAL MARK DIFAT", 0x00, "Ethiopic_Sup"),
    c(0x1395, None, "ETHIOPIC TONAL MARK KENAT", 0x00, "Ethiopic_Sup"),
    c(0x1396, None, "ETHIOPIC TONAL MARK CHIRET", 0x00, "Ethiopic_Sup"),
    c(0x1397, None, "ETHIOPIC TONAL MARK HIDET", 0x00, "Ethiopic_Sup"),
    c(0x1398, None, "ETHIOPIC TONAL MARK DERET-HIDET", 0x00, "Ethiopic_Sup"),
    c(0x1399, None, "ETHIOPIC TONAL MARK KURT", 0x00, "Ethiopic_Sup"),
    c(0x13A0, None, "CHEROKEE LETTER A", 0x31, "Cherokee"),
    c(0x13A1, None, "CHEROKEE LETTER E", 0x31, "Cherokee"),
    c(0x13A2, None, "CHEROKEE LETTER I", 0x31, "Cherokee"),
    c(0x13A3, None, "CHEROKEE LETTER O", 0x31, "Cherokee"),
    c(0x13A4, None, "CHEROKEE LETTER U", 0x31, "Cherokee"),
    c(0x13A5, None, "CHEROKEE LETTER V", 0x31, "Cherokee"),
    c(0x13A6, None, "CHEROKEE LETTER GA", 0x31, "Cherokee"),
    c(0x13A7, None, "CHEROKEE LETTER KA", 0x31, "Cherokee"),
    c(0x13A8, None, "CHEROKEE LETTER GE", 0x31, "Cherokee"),
    c(0x13A9, None, "CHEROKEE LETTER GI", 0x31, "Cherokee"),
    c(0x13AA, None, "CHEROKEE LETTER GO", 0x31, "Cherokee"),
    c(0x13AB, None, "CHEROKEE LETTER GU", 0x31, "Cherokee"),
    c(0x13AC, None, "CHEROKEE LETTER GV", 0x31, "Cherokee"),
    c(0x13AD, None, "CHEROKEE LETTER HA", 0x31, "Cherokee"),
    c(0x13AE, None, "CHEROKEE LETTER HE", 0x31, "Cherokee"),
    c(0x13AF, None, "CHEROKEE LETTER HI", 0x31, "Cherokee"),
    c(0x13B0, None, "CHEROKEE LETTER HO", 0x31, "Cherokee"),
    c(0x13B1, None, "CHEROKEE LETTER HU", 0x31, "Cherokee"),
    c(0x13B2, None, "CHEROKEE LETTER HV", 0x31, "Cherokee"),
    c(0x13B3, None, "CHEROKEE LETTER LA", 0x31, "Cherokee"),
    c(0x13B4, None, "CHEROKEE LETTER LE", 0x31, "Cherokee"),
    c(0x13B5, None, "CHEROKEE LETTER LI", 0x31, "Cherokee"),
    c(0x13B6, None, "CHEROKEE LETTER LO", 0x31, "Cherokee"),
    c(0x13B7, None, "CHEROKEE LETTER LU", 0x31, "Cherokee"),
    c(0x13B8, None, "CHEROKEE LETTER LV", 0x31, "Cherokee"),
    c(0x13B9, None, "CHEROKEE LETTER MA", 0x31, "Cherokee"),
    c(0x13BA, None, "CHEROKEE LETTER ME", 0x31, "Cherokee"),
    c(0x13BB, None, "CHEROKEE LETTER MI", 0x31, "Cherokee"),
    c(0x13BC, None, "CHEROKEE LETTER MO", 0x31, "Cherokee"),
    c(0x13BD, None, "CHEROKEE LETTER MU", 0x31, "Cherokee"),
    c(0x13BE, None, "CHEROKEE LETTER NA", 0x31, "Cherokee"),
    c(0x13BF, None, "CHEROKEE LETTER HNA", 0x31, "Cherokee"),
    c(0x13C0, None, "CHEROKEE LETTER NAH", 0x31, "Cherokee"),
    c(0x13C1, None, "CHEROKEE LETTER NE", 0x31, "Cherokee"),
    c(0x13C2, None, "CHEROKEE LETTER NI", 0x31, "Cherokee"),
    c(0x13C3, None, "CHEROKEE LETTER NO", 0x31, "Cherokee"),
    c(0x13C4, None, "CHEROKEE LETTER NU", 0x31, "Cherokee"),
    c(0x13C5, None, "CHEROKEE LETTER NV", 0x31, "Cherokee"),
    c(0x13C6, None, "CHEROKEE LETTER QUA", 0x31, "Cherokee"),
    c(0x13C7, None, "CHEROKEE LETTER QUE", 0x31, "Cherokee"),
    c(0x13C8, None, "CHEROKEE LETTER QUI", 0x31, "Cherokee"),
    c(0x13C9, None, "CHEROKEE LETTER QUO", 0x31, "Cherokee"),
    c(0x13CA, None, "CHEROKEE LETTER QUU", 0x31, "Cherokee"),
    c(0x13CB, None, "CHEROKEE LETTER QUV", 0x31, "Cherokee"),
    c(0x13CC, None, "CHEROKEE LETTER SA", 0x31, "Cherokee"),
    c(0x13CD, None, "CHEROKEE LETTER S", 0x31, "Cherokee"),
    c(0x13CE, None, "CHEROKEE LETTER SE", 0x31, "Cherokee"),
    c(0x13CF, None, "CHEROKEE LETTER SI", 0x31, "Cherokee"),
    c(0x13D0, None, "CHEROKEE LETTER SO", 0x31, "Cherokee"),
    c(0x13D1, None, "CHEROKEE LETTER SU", 0x31, "Cherokee"),
    c(0x13D2, None, "CHEROKEE LETTER SV", 0x31, "Cherokee"),
    c(0x13D3, None, "CHEROKEE LETTER DA", 0x31, "Cherokee"),
    c(0x13D4, None, "CHEROKEE LETTER TA", 0x31, "Cherokee"),
    c(0x13D5, None, "CHEROKEE LETTER DE", 0x31, "Cherokee"),
    c(0x13D6, None, "CHEROKEE LETTER TE", 0x31, "Cherokee"),
    c(0x13D7, None, "CHEROKEE LETTER DI", 0x31, "Cherokee"),
    c(0x13D8, None, "CHEROKEE LETTER TI", 0x31, "Cherokee"),
    c(0x13D9, None, "CHEROKEE LETTER DO", 0x31, "Cherokee"),
    c(0x13DA, None, "CHEROKEE LETTER DU", 0x31, "Cherokee"),
    c(0x13DB, None, "CHEROKEE LETTER DV", 0x31, "Cherokee"),
    c(0x13DC, None, "CHEROKEE LETTER DLA", 0x31, "Cherokee"),
    c(0x13DD, None, "CHEROKEE LETTER TLA", 0x31, "Cherokee"),
    c(0x13DE, None, "CHEROKEE LETTER TLE", 0x31, "Cherokee"),
    c(0x13DF, None, "CHEROKEE LETTER TLI", 0x31, "Cherokee"),
    c(0x13E0, None, "CHEROKEE LETTER TLO", 0x31, "Cherokee"),
    c(0x13E1, None, "CHEROKEE LETTER TLU", 0x31, "Cherokee"),
    c(0x13E2, None, "CHEROKEE LETTER TLV", 0x31, "Cherokee"),
    c(0x13E3, None, "CHEROKEE LETTER TSA", 0x31, "Cherokee"),
    c(0x13E4, None, "CHEROKEE LETTER TSE", 0x31, "Cherokee"),
    c(0x13E5, None, "CHEROKEE LETTER TSI", 0x31, "Cherokee"),
    c(0x13E6, None, "CHEROKEE LETTER TSO", 0x31, "Cherokee"),
    c(0x13E7, None, "CHEROKEE LETTER TSU", 0x31, "Cherokee"),
    c(0x13E8, None, "CHEROKEE LETTER TSV", 0x31, "Cherokee"),
    c(0x13E9, None, "CHEROKEE LETTER WA", 0x31, "Cherokee"),
    c(0x13EA, None, "CHEROKEE LETTER WE", 0x31, "Cherokee"),
    c(0x13EB, None, "CHEROKEE LETTER WI", 0x31, "Cherokee"),
    c(0x13EC, None, "CHEROKEE LETTER WO", 0x31, "Cherokee"),
    c(0x13ED, None, "CHEROKEE LETTER WU", 0x31, "Cherokee"),
    c(0x13EE, None, "CHEROKEE LETTER WV", 0x31, "Cherokee"),
    c(0x13EF, None, "CHEROKEE LETTER YA", 0x31, "Cherokee"),
    c(0x13F0, None, "CHEROKEE LETTER YE", 0x31, "Cherokee"),
    c(0x13F1, None, "CHEROKEE LETTER YI", 0x31, "Cherokee"),
    c(0x13F2, None, "CHEROKEE LETTER YO", 0x31, "Cherokee"),
    c(0x13F3, None, "CHEROKEE LETTER YU", 0x31, "Cherokee"),
    c(0x13F4, None, "CHEROKEE LETTER YV", 0x31, "Cherokee"),
    c(0x13F5, None, "CHEROKEE LETTER MV", 0x31, "Cherokee"),
    c(0x13F8, None, "CHEROKEE SMALL LETTER YE", 0x31, "Cherokee"),
    c(0x13F9, None, "CHEROKEE SMALL LETTER YI", 0x31, "Cherokee"),
    c(0x13FA, None, "CHEROKEE SMALL LETTER YO", 0x31, "Cherokee"),
    c(0x13FB, None, "CHEROKEE SMALL LETTER YU", 0x31, "Cherokee"),
    c(0x13FC, None, "CHEROKEE SMALL LETTER YV", 0x31, "Cherokee"),
    c(0x13FD, None, "CHEROKEE SMALL LETTER MV", 0x31, "Cherokee"),
    c(0x1400, None, "CANADIAN SYLLABICS HYPHEN", 0x00, "UCAS"),
    c(0x1401, None, "CANADIAN SYLLABICS E", 0x31, "UCAS"),
    c(0x1402, None, "CANADIAN SYLLABICS AAI", 0x31, "UCAS"),
    c(0x1403, None, "CANADIAN SYLLABICS I", 0x31, "UCAS"),
    c(0x1404, None, "CANADIAN SYLLABICS II", 0x31, "UCAS"),
    c(0x1405, None, "CANADIAN SYLLABICS O", 0x31, "UCAS"),
    c(0x1406, None, "CANADIAN SYLLABICS OO", 0x31, "UCAS"),
    c(0x1407, None, "CANADIAN SYLLABICS Y-CREE OO", 0x31, "UCAS"),
    c(0x1408, None, "CANADIAN SYLLABICS CARRIER EE", 0x31, "UCAS"),
    c(0x1409, None, "CANADIAN SYLLABICS CARRIER I", 0x31, "UCAS"),
    c(0x140A, None, "CANADIAN SYLLABICS A", 0x31, "UCAS"),
    c(0x140B, None, "CANADIAN SYLLABICS AA", 0x31, "UCAS"),
    c(0x140C, None, "CANADIAN SYLLABICS WE", 0x31, "UCAS"),
    c(0x140D, None, "CANADIAN SYLLABICS WEST-CREE WE", 0x31, "UCAS"),
    c(0x140E, None, "CANADIAN SYLLABICS WI", 0x31, "UCAS"),
    c(0x140F, None, "CANADIAN SYLLABICS WEST-CREE WI", 0x31, "UCAS"),
    c(0x1410, None, "CANADIAN SYLLABICS WII", 0x31, "UCAS"),
    c(0x1411, None, "CANADIAN SYLLABICS WEST-CREE WII", 0x31, "UCAS"),
    c(0x1412, None, "CANADIAN SYLLABICS WO", 0x31, "UCAS"),
    c(0x1413, None, "CANADIAN SYLLABICS WEST-CREE WO", 0x31, "UCAS"),
    c(0x1414, None, "CANADIAN SYLLABICS WOO", 0x31, "UCAS"),
    c(0x1415, None, "CANADIAN SYLLABICS WEST-CREE WOO", 0x31, "UCAS"),
    c(0x1416, None, "CANADIAN SYLLABICS NASKAPI WOO", 0x31, "UCAS"),
    c(0x1417, None, "CANADIAN SYLLABICS WA", 0x31, "UCAS"),
    c(0x1418, None, "CANADIAN SYLLABICS WEST-CREE WA", 0x31, "UCAS"),
    c(0x1419, None, "CANADIAN SYLLABICS WAA", 0x31, "UCAS"),
    c(0x141A, None, "CANADIAN SYLLABICS WEST-CREE WAA", 0x31, "UCAS"),
    c(0x141B, None, "CANADIAN SYLLABICS NASKAPI WAA", 0x31, "UCAS"),
    c(0x141C, None, "CANADIAN SYLLABICS AI", 0x31, "UCAS"),
    c(0x141D, None, "CANADIAN SYLLABICS Y-CREE W", 0x31, "UCAS"),
    c(0x141E, None, "CANADIAN SYLLABICS GLOTTAL STOP", 0x31, "UCAS"),
    c(0x141F, None, "CANADIAN SYLLABICS FINAL ACUTE", 0x31, "UCAS"),
    c(0x1420, None, "CANADIAN SYLLABICS FINAL GRAVE", 0x31, "UCAS"),
    c(0x1421, None, "CANADIAN SYLLABICS FINAL BOTTOM HALF RING", 0x31, "UCAS"),
    c(0x1422, None, "CANADIAN SYLLABICS FINAL TOP HALF RING", 0x31, "UCAS"),
    c(0x1423, None, "CANADIAN SYLLABICS FINAL RIGHT HALF RING", 0x31, "UCAS"),
    c(0x1424, None, "CANADIAN SYLLABICS FINAL RING", 0x31, "UCAS"),
    c(0x1425, None, "CANADIAN SYLLABICS FINAL DOUBLE ACUTE", 0x31, "UCAS"),
    c(0x1426, None, "CANADIAN SYLLABICS FINAL DOUBLE SHORT VERTICAL STROKES", 0x31, "UCAS"),
    c(0x1427, None, "CANADIAN SYLLABICS FINAL MIDDLE DOT", 0x31, "UCAS"),
    c(0x1428, None, "CANADIAN SYLLABICS FINAL SHORT HORIZONTAL STROKE", 0x31, "UCAS"),
    c(0x1429, None, "CANADIAN SYLLABICS FINAL PLUS", 0x31, "UCAS"),
    c(0x142A, None, "CANADIAN SYLLABICS FINAL DOWN TACK", 0x31, "UCAS"),
    c(0x142B, None, "CANADIAN SYLLABICS EN", 0x31, "UCAS"),
    c(0x142C, None, "CANADIAN SYLLABICS IN", 0x31, "UCAS"),
    c(0x142D, None, "CANADIAN SYLLABICS ON", 0x31, "UCAS"),
    c(0x142E, None, "CANADIAN SYLLABICS AN", 0x31, "UCAS"),
    c(0x142F, None, "CANADIAN SYLLABICS PE", 0x31, "UCAS"),
    c(0x1430, None, "CANADIAN SYLLABICS PAAI", 0x31, "UCAS"),
    c(0x1431, None, "CANADIAN SYLLABICS PI", 0x31, "UCAS"),
    c(0x1432, None, "CANADIAN SYLLABICS PII", 0x31, "UCAS"),
    c(0x1433, None, "CANADIAN SYLLABICS PO", 0x31, "UCAS"),
    c(0x1434, None, "CANADIAN SYLLABICS POO", 0x31, "UCAS"),
    c(0x1435, None, "CANADIAN SYLLABICS Y-CREE POO", 0x31, "UCAS"),
    c(0x1436, None, "CANADIAN SYLLABICS CARRIER HEE", 0x31, "UCAS"),
    c(0x1437, None, "CANADIAN SYLLABICS CARRIER HI", 0x31, "UCAS"),
    c(0x1438, None, "CANADIAN SYLLABICS PA", 0x31, "UCAS"),
    c(0x1439, None, "CANADIAN SYLLABICS PAA", 0x31, "UCAS"),
    c(0x143A, None, "CANADIAN SYLLABICS PWE", 0x31, "UCAS"),
    c(0x143B, None, "CANADIAN SYLLABICS WEST-CREE PWE", 0x31, "UCAS"),
    c(0x143C, None, "CANADIAN SYLLABICS PWI", 0x31, "UCAS"),
    c(0x143D, None, "CANADIAN SYLLABICS WEST-CREE PWI", 0x31, "UCAS"),
    c(0x143E, None, "CANADIAN SYLLABICS PWII", 0x31, "UCAS"),
    c(0x143F, None, "CANADIAN SYLLABICS WEST-CREE PWII", 0x31, "UCAS"),
    c(0x1440, None, "CANADIAN SYLLABICS PWO", 0x31, "UCAS"),
    c(0x1441, None, "CANADIAN SYLLABICS WEST-CREE PWO", 0x31, "UCAS"),
    c(0x1442, None, "CANADIAN SYLLABICS PWOO", 0x31, "UCAS"),
    c(0x1443, None, "CANADIAN SYLLABICS WEST-CREE PWOO", 0x31, "UCAS"),
    c(0x1444, None, "CANADIAN SYLLABICS PWA", 0x31, "UCAS"),
    c(0x1445, None, "CANADIAN SYLLABICS WEST-CREE PWA", 0x31, "UCAS"),
    c(0x1446, None, "CANADIAN SYLLABICS PWAA", 0x31, "UCAS"),
    c(0x1447, None, "CANADIAN SYLLABICS WEST-CREE PWAA", 0x31, "UCAS"),
    c(0x1448, None, "CANADIAN SYLLABICS Y-CREE PWAA", 0x31, "UCAS"),
    c(0x1449, None, "CANADIAN SYLLABICS P", 0x31, "UCAS"),
    c(0x144A, None, "CANADIAN SYLLABICS WEST-CREE P", 0x31, "UCAS"),
    c(0x144B, None, "CANADIAN SYLLABICS CARRIER H", 0x31, "UCAS"),
    c(0x144C, None, "CANADIAN SYLLABICS TE", 0x31, "UCAS"),
    c(0x144D, None, "CANADIAN SYLLABICS TAAI", 0x31, "UCAS"),
    c(0x144E, None, "CANADIAN SYLLABICS TI", 0x31, "UCAS"),
    c(0x144F, None, "CANADIAN SYLLABICS TII", 0x31, "UCAS"),
    c(0x1450, None, "CANADIAN SYLLABICS TO", 0x31, "UCAS"),
    c(0x1451, None, "CANADIAN SYLLABICS TOO", 0x31, "UCAS"),
    c(0x1452, None, "CANADIAN SYLLABICS Y-CREE TOO", 0x31, "UCAS"),
    c(0x1453, None, "CANADIAN SYLLABICS CARRIER DEE", 0x31, "UCAS"),
    c(0x1454, None, "CANADIAN SYLLABICS CARRIER DI", 0x31, "UCAS"),
    c(0x1455, None, "CANADIAN SYLLABICS TA", 0x31, "UCAS"),
    c(0x1456, None, "CANADIAN SYLLABICS TAA", 0x31, "UCAS"),
    c(0x1457, None, "CANADIAN SYLLABICS TWE", 0x31, "UCAS"),
    c(0x1458, None, "CANADIAN SYLLABICS WEST-CREE TWE", 0x31, "UCAS"),
    c(0x1459, None, "CANADIAN SYLLABICS TWI", 0x31, "UCAS"),
    c(0x145A, None, "CANADIAN SYLLABICS WEST-CREE TWI", 0x31, "UCAS"),
    c(0x145B, None, "CANADIAN SYLLABICS TWII", 0x31, "UCAS"),
    c(0x145C, None, "CANADIAN SYLLABICS WEST-CREE TWII", 0x31, "UCAS"),
    c(0x145D, None, "CANADIAN SYLLABICS TWO", 0x31, "UCAS"),
    c(0x145E, None, "CANADIAN SYLLABICS WEST-CREE TWO", 0x31, "UCAS"),
    c(0x145F, None, "CANADIAN SYLLABICS TWOO", 0x31, "UCAS"),
    c(0x1460, None, "CANADIAN SYLLABICS WEST-CREE TWOO", 0x31, "UCAS"),
    c(0x1461, None, "CANADIAN SYLLABICS TWA", 0x31, "UCAS"),
    c(0x1462, None, "CANADIAN SYLLABICS WEST-CREE TWA", 0x31, "UCAS"),
    c(0x1463, None, "CANADIAN SYLLABICS TWAA", 0x31, "UCAS"),
    c(0x1464, None, "CANADIAN SYLLABICS WEST-CREE TWAA", 0x31, "UCAS"),
    c(0x1465, None, "CANADIAN SYLLABICS NASKAPI TWAA", 0x31, "UCAS"),
    c(0x1466, None, "CANADIAN SYLLABICS T", 0x31, "UCAS"),
    c(0x1467, None, "CANADIAN SYLLABICS TTE", 0x31, "UCAS"),
    c(0x1468, None, "CANADIAN SYLLABICS TTI", 0x31, "UCAS"),
    c(0x1469, None, "CANADIAN SYLLABICS TTO", 0x31, "UCAS"),
    c(0x146A, None, "CANADIAN SYLLABICS TTA", 0x31, "UCAS"),
    c(0x146B, None, "CANADIAN SYLLABICS KE", 0x31, "UCAS"),
    c(0x146C, None, "CANADIAN SYLLABICS KAAI", 0x31, "UCAS"),
    c(0x146D, None, "CANADIAN SYLLABICS KI", 0x31, "UCAS"),
    c(0x146E, None, "CANADIAN SYLLABICS KII", 0x31, "UCAS"),
    c(0x146F, None, "CANADIAN SYLLABICS KO", 0x31, "UCAS"),
    c(0x1470, None, "CANADIAN SYLLABICS KOO", 0x31, "UCAS"),
    c(0x1471, None, "CANADIAN SYLLABICS Y-CREE KOO", 0x31, "UCAS"),
    c(0x1472, None, "CANADIAN SYLLABICS KA", 0x31, "UCAS"),
    c(0x1473, None, "CANADIAN SYLLABICS KAA", 0x31, "UCAS"),
    c(0x1474, None, "CANADIAN SYLLABICS KWE", 0x31, "UCAS"),
    c(0x1475, None, "CANADIAN SYLLABICS WEST-CREE KWE", 0x31, "UCAS"),
    c(0x1476, None, "CANADIAN SYLLABICS KWI", 0x31, "UCAS"),
    c(0x1477, None, "CANADIAN SYLLABICS WEST-CREE KWI", 0x31, "UCAS"),
    c(0x1478, None, "CANADIAN SYLLABICS KWII", 0x31, "UCAS"),
    c(0x1479, None, "CANADIAN SYLLABICS WEST-CREE KWII", 0x31, "UCAS"),
    c(0x147A, None, "CANADIAN SYLLABICS KWO", 0x31, "UCAS"),
    c(0x147B, None, "CANADIAN SYLLABICS WEST-CREE KWO", 0x31, "UCAS"),
    c(0x147C, None, "CANADIAN SYLLABICS KWOO", 0x31, "UCAS"),
    c(0x147D, None, "CANADIAN SYLLABICS WEST-CREE KWOO", 0x31, "UCAS"),
    c(0x147E, None, "CANADIAN SYLLABICS KWA", 0x31, "UCAS"),
    c(0x147F, None, "CANADIAN SYLLABICS WEST-CREE KWA", 0x31, "UCAS"),
    c(0x1480, None, "CANADIAN SYLLABICS KWAA", 0x31, "UCAS"),
    c(0x1481, None, "CANADIAN SYLLABICS WEST-CREE KWAA", 0x31, "UCAS"),
    c(0x1482, None, "CANADIAN SYLLABICS NASKAPI KWAA", 0x31, "UCAS"),
    c(0x1483, None, "CANADIAN SYLLABICS K", 0x31, "UCAS"),
    c(0x1484, None, "CANADIAN SYLLABICS KW", 0x31, "UCAS"),
    c(0x1485, None, "CANADIAN SYLLABICS SOUTH-SLAVEY KEH", 0x31, "UCAS"),
    c(0x1486, None, "CANADIAN SYLLABICS SOUTH-SLAVEY KIH", 0x31, "UCAS"),
    c(0x1487, None, "CANADIAN SYLLABICS SOUTH-SLAVEY KOH", 0x31, "UCAS"),
    c(0x1488, None, "CANADIAN SYLLABICS SOUTH-SLAVEY KAH", 0x31, "UCAS"),
    c(0x1489, None, "CANADIAN SYLLABICS CE", 0x31, "UCAS"),
    c(0x148A, None, "CANADIAN SYLLABICS CAAI", 0x31, "UCAS"),
    c(0x148B, None, "CANADIAN SYLLABICS CI", 0x31, "UCAS"),
    c(0x148C, None, "CANADIAN SYLLABICS CII", 0x31, "UCAS"),
    c(0x148D, None, "CANADIAN SYLLABICS CO", 0x31, "UCAS"),
    c(0x148E, None, "CANADIAN SYLLABICS COO", 0x31, "UCAS"),
    c(0x148F, None, "CANADIAN SYLLABICS Y-CREE COO", 0x31, "UCAS"),
    c(0x1490, None, "CANADIAN SYLLABICS CA", 0x31, "UCAS"),
    c(0x1491, None, "CANADIAN SYLLABICS CAA", 0x31, "UCAS"),
    c(0x1492, None, "CANADIAN SYLLABICS CWE", 0x31, "UCAS"),
    c(0x1493, None, "CANADIAN SYLLABICS WEST-CREE CWE", 0x31, "UCAS"),
    c(0x1494, None, "CANADIAN SYLLABICS CWI", 0x31, "UCAS"),
    c(0x1495, None, "CANADIAN SYLLABICS WEST-CREE CWI", 0x31, "UCAS"),
    c(0x1496, None, "CANADIAN SYLLABICS CWII", 0x31, "UCAS"),
    c(0x1497, None, "CANADIAN SYLLABICS WEST-CREE CWII", 0x31, "UCAS"),
    c(0x1498, None, "CANADIAN SYLLABICS CWO", 0x31, "UCAS"),
    c(0x1499, None, "CANADIAN SYLLABICS WEST-CREE CWO", 0x31, "UCAS"),
    c(0x149A, None, "CANADIAN SYLLABICS CWOO", 0x31, "UCAS"),
    c(0x149B, None, "CANADIAN SYLLABICS WEST-CREE CWOO", 0x31, "UCAS"),
    c(0x149C, None, "CANADIAN SYLLABICS CWA", 0x31, "UCAS"),
    c(0x149D, None, "CANADIAN SYLLABICS WEST-CREE CWA", 0x31, "UCAS"),
    c(0x149E, None, "CANADIAN SYLLABICS CWAA", 0x31, "UCAS"),
    c(0x149F, None, "CANADIAN SYLLABICS WEST-CREE CWAA", 0x31, "UCAS"),
    c(0x14A0, None, "CANADIAN SYLLABICS NASKAPI CWAA", 0x31, "UCAS"),
    c(0x14A1, None, "CANADIAN SYLLABICS C", 0x31, "UCAS"),
    c(0x14A2, None, "CANADIAN SYLLABICS SAYISI TH", 0x31, "UCAS"),
    c(0x14A3, None, "CANADIAN SYLLABICS ME", 0x31, "UCAS"),
    c(0x14A4, None, "CANADIAN SYLLABICS MAAI", 0x31, "UCAS"),
    c(0x14A5, None, "CANADIAN SYLLABICS MI", 0x31, "UCAS"),
    c(0x14A6, None, "CANADIAN SYLLABICS MII", 0x31, "UCAS"),
    c(0x14A7, None, "CANADIAN SYLLABICS MO", 0x31, "UCAS"),
    c(0x14A8, None, "CANADIAN SYLLABICS MOO", 0x31, "UCAS"),
    c(0x14A9, None, "CANADIAN SYLLABICS Y-CREE MOO", 0x31, "UCAS"),
    c(0x14AA, None, "CANADIAN SYLLABICS MA", 0x31, "UCAS"),
    c(0x14AB, None, "CANADIAN SYLLABICS MAA", 0x31, "UCAS"),
    c(0x14AC, None, "CANADIAN SYLLABICS MWE", 0x31, "UCAS"),
    c(0x14AD, None, "CANADIAN SYLLABICS WEST-CREE MWE", 0x31, "UCAS"),
    c(0x14AE, None, "CANADIAN SYLLABICS MWI", 0x31, "UCAS"),
    c(0x14AF, None, "CANADIAN SYLLABICS WEST-CREE MWI", 0x31, "UCAS"),
    c(0x14B0, None, "CANADIAN SYLLABICS MWII", 0x31, "UCAS"),
    c(0x14B1, None, "CANADIAN SYLLABICS WEST-CREE MWII", 0x31, "UCAS"),
    c(0x14B2, None, "CANADIAN SYLLABICS MWO", 0x31, "UCAS"),
    c(0x14B3, None, "CANADIAN SYLLABICS WEST-CREE MWO", 0x31, "UCAS"),
    c(0x14B4, None, "CANADIAN SYLLABICS MWOO", 0x31, "UCAS"),
    c(0x14B5, None, "CANADIAN SYLLABICS WEST-CREE MWOO", 0x31, "UCAS"),
    c(0x14B6, None, "CANADIAN SYLLABICS MWA", 0x31, "UCAS"),
    c(0x14B7, None, "CANADIAN SYLLABICS WEST-CREE MWA", 0x31, "UCAS"),
    c(0x14B8, None, "CANADIAN SYLLABICS MWAA", 0x31, "UCAS"),
    c(0x14B9, None, "CANADIAN SYLLABICS WEST-CREE MWAA", 0x31, "UCAS"),
    c(0x14BA, None, "CANADIAN SYLLABICS NASKAPI MWAA", 0x31, "UCAS"),
    c(0x14BB, None, "CANADIAN SYLLABICS M", 0x31, "UCAS"),
    c(0x14BC, None, "CANADIAN SYLLABICS WEST-CREE M", 0x31, "UCAS"),
    c(0x14BD, None, "CANADIAN SYLLABICS MH", 0x31, "UCAS"),
    c(0x14BE, None, "CANADIAN SYLLABICS ATHAPASCAN M", 0x31, "UCAS"),
    c(0x14BF, None, "CANADIAN SYLLABICS SAYISI M", 0x31, "UCAS"),
    c(0x14C0, None, "CANADIAN SYLLABICS NE", 0x31, "UCAS"),
    c(0x14C1, None, "CANADIAN SYLLABICS NAAI", 0x31, "UCAS"),
    c(0x14C2, None, "CANADIAN SYLLABICS NI", 0x31, "UCAS"),
    c(0x14C3, None, "CANADIAN SYLLABICS NII", 0x31, "UCAS"),
    c(0x14C4, None, "CANADIAN SYLLABICS NO", 0x31, "UCAS"),
    c(0x14C5, None, "CANADIAN SYLLABICS NOO", 0x31, "UCAS"),
    c(0x14C6, None, "CANADIAN SYLLABICS Y-CREE NOO", 0x31, "UCAS"),
    c(0x14C7, None, "CANADIAN SYLLABICS NA", 0x31, "UCAS"),
    c(0x14C8, None, "CANADIAN SYLLABICS NAA", 0x31, "UCAS"),
    c(0x14C9, None, "CANADIAN SYLLABICS NWE", 0x31, "UCAS"),
    c(0x14CA, None, "CANADIAN SYLLABICS WEST-CREE NWE", 0x31, "UCAS"),
    c(0x14CB, None, "CANADIAN SYLLABICS NWA", 0x31, "UCAS"),
    c(0x14CC, None, "CANADIAN SYLLABICS WEST-CREE NWA", 0x31, "UCAS"),
    c(0x14CD, None, "CANADIAN SYLLABICS NWAA", 0x31, "UCAS"),
    c(0x14CE, None, "CANADIAN SYLLABICS WEST-CREE NWAA", 0x31, "UCAS"),
    c(0x14CF, None, "CANADIAN SYLLABICS NASKAPI NWAA", 0x31, "UCAS"),
    c(0x14D0, None, "CANADIAN SYLLABICS N", 0x31, "UCAS"),
    c(0x14D1, None, "CANADIAN SYLLABICS CARRIER NG", 0x31, "UCAS"),
    c(0x14D2, None, "CANADIAN SYLLABICS NH", 0x31, "UCAS"),
    c(0x14D3, None, "CANADIAN SYLLABICS LE", 0x31, "UCAS"),
    c(0x14D4, None, "CANADIAN SYLLABICS LAAI", 0x31, "UCAS"),
    c(0x14D5, None, "CANADIAN SYLLABICS LI", 0x31, "UCAS"),
    c(0x14D6, None, "CANADIAN SYLLABICS LII", 0x31, "UCAS"),
    c(0x14D7, None, "CANADIAN SYLLABICS LO", 0x31, "UCAS"),
    c(0x14D8, None, "CANADIAN SYLLABICS LOO", 0x31, "UCAS"),
    c(0x14D9, None, "CANADIAN SYLLABICS Y-CREE LOO", 0x31, "UCAS"),
    c(0x14DA, None, "CANADIAN SYLLABICS LA", 0x31, "UCAS"),
    c(0x14DB, None, "CANADIAN SYLLABICS LAA", 0x31, "UCAS"),
    c(0x14DC, None, "CANADIAN SYLLABICS LWE", 0x31, "UCAS"),
    c(0x14DD, None, "CANADIAN SYLLABICS WEST-CREE LWE", 0x31, "UCAS"),
    c(0x14DE, None, "CANADIAN SYLLABICS LWI", 0x31, "UCAS"),
    c(0x14DF, None, "CANADIAN SYLLABICS WEST-CREE LWI", 0x31, "UCAS"),
    c(0x14E0, None, "CANADIAN SYLLABICS LWII", 0x31, "UCAS"),
    c(0x14E1, None, "CANADIAN SYLLABICS WEST-CREE LWII", 0x31, "UCAS"),
    c(0x14E2, None, "CANADIAN SYLLABICS LWO", 0x31, "UCAS"),
    c(0x14E3, None, "CANADIAN SYLLABICS WEST-CREE LWO", 0x31, "UCAS"),
    c(0x14E4, None, "CANADIAN SYLLABICS LWOO", 0x31, "UCAS"),
    c(0x14E5, None, "CANADIAN SYLLABICS WEST-CREE LWOO", 0x31, "UCAS"),
    c(0x14E6, None, "CANADIAN SYLLABICS LWA", 0x31, "UCAS"),
    c(0x14E7, None, "CANADIAN SYLLABICS WEST-CREE LWA", 0x31, "UCAS"),
    c(0x14E8, None, "CANADIAN SYLLABICS LWAA", 0x31, "UCAS"),
    c(0x14E9, None, "CANADIAN SYLLABICS WEST-CREE LWAA", 0x31, "UCAS"),
    c(0x14EA, None, "CANADIAN SYLLABICS L", 0x31, "UCAS"),
    c(0x14EB, None, "CANADIAN SYLLABICS WEST-CREE L", 0x31, "UCAS"),
    c(0x14EC, None, "CANADIAN SYLLABICS MEDIAL L", 0x31, "UCAS"),
    c(0x14ED, None, "CANADIAN SYLLABICS SE", 0x31, "UCAS"),
    c(0x14EE, None, "CANADIAN SYLLABICS SAAI", 0x31, "UCAS"),
    c(0x14EF, None, "CANADIAN SYLLABICS SI", 0x31, "UCAS"),
    c(0x14F0, None, "CANADIAN SYLLABICS SII", 0x31, "UCAS"),
    c(0x14F1, None, "CANADIAN SYLLABICS SO", 0x31, "UCAS"),
    c(0x14F2, None, "CANADIAN SYLLABICS SOO", 0x31, "UCAS"),
    c(0x14F3, None, "CANADIAN SYLLABICS Y-CREE SOO", 0x31, "UCAS"),
    c(0x14F4, None, "CANADIAN SYLLABICS SA", 0x31, "UCAS"),
    c(0x14F5, None, "CANADIAN SYLLABICS SAA", 0x31, "UCAS"),
    c(0x14F6, None, "CANADIAN SYLLABICS SWE", 0x31, "UCAS"),
    c(0x14F7, None, "CANADIAN SYLLABICS WEST-CREE SWE", 0x31, "UCAS"),
    c(0x14F8, None, "CANADIAN SYLLABICS SWI", 0x31, "UCAS"),
    c(0x14F9, None, "CANADIAN SYLLABICS WEST-CREE SWI", 0x31, "UCAS"),
    c(0x14FA, None, "CANADIAN SYLLABICS SWII", 0x31, "UCAS"),
    c(0x14FB, None, "CANADIAN SYLLABICS WEST-CREE SWII", 0x31, "UCAS"),
    c(0x14FC, None, "CANADIAN SYLLABICS SWO", 0x31, "UCAS"),
    c(0x14FD, None, "CANADIAN SYLLABICS WEST-CREE SWO", 0x31, "UCAS"),
    c(0x14FE, None, "CANADIAN SYLLABICS SWOO", 0x31, "UCAS"),
    c(0x14FF, None, "CANADIAN SYLLABICS WEST-CREE SWOO", 0x31, "UCAS"),
    c(0x1500, None, "CANADIAN SYLLABICS SWA", 0x31, "UCAS"),
    c(0x1501, None, "CANADIAN SYLLABICS WEST-CREE SWA", 0x31, "UCAS"),
    c(0x1502, None, "CANADIAN SYLLABICS SWAA", 0x31, "UCAS"),
    c(0x1503, None, "CANADIAN SYLLABICS WEST-CREE SWAA", 0x31, "UCAS"),
    c(0x1504, None, "CANADIAN SYLLABICS NASKAPI SWAA", 0x31, "UCAS"),
    c(0x1505, None, "CANADIAN SYLLABICS S", 0x31, "UCAS"),
    c(0x1506, None, "CANADIAN SYLLABICS ATHAPASCAN S", 0x31, "UCAS"),
    c(0x1507, None, "CANADIAN SYLLABICS SW", 0x31, "UCAS"),
    c(0x1508, None, "CANADIAN SYLLABICS BLACKFOOT S", 0x31, "UCAS"),
    c(0x1509, None, "CANADIAN SYLLABICS MOOSE-CREE SK", 0x31, "UCAS"),
    c(0x150A, None, "CANADIAN SYLLABICS NASKAPI SKW", 0x31, "UCAS"),
    c(0x150B, None, "CANADIAN SYLLABICS NASKAPI S-W", 0x31, "UCAS"),
    c(0x150C, None, "CANADIAN SYLLABICS NASKAPI SPWA", 0x31, "UCAS"),
    c(0x150D, None, "CANADIAN SYLLABICS NASKAPI STWA", 0x31, "UCAS"),
    c(0x150E, None, "CANADIAN SYLLABICS NASKAPI SKWA", 0x31, "UCAS"),
    c(0x150F, None, "CANADIAN SYLLABICS NASKAPI SCWA", 0x31, "UCAS"),
    c(0x1510, None, "CANADIAN SYLLABICS SHE", 0x31, "UCAS"),
    c(0x1511, None, "CANADIAN SYLLABICS SHI", 0x31, "UCAS"),
    c(0x1512, None, "CANADIAN SYLLABICS SHII", 0x31, "UCAS"),
    c(0x1513, None, "CANADIAN SYLLABICS SHO", 0x31, "UCAS"),
    c(0x1514, None, "CANADIAN SYLLABICS SHOO", 0x31, "UCAS"),
    c(0x1515, None, "CANADIAN SYLLABICS SHA", 0x31, "UCAS"),
    c(0x1516, None, "CANADIAN SYLLABICS SHAA", 0x31, "UCAS"),
    c(0x1517, None, "CANADIAN SYLLABICS SHWE", 0x31, "UCAS"),
    c(0x1518, None, "CANADIAN SYLLABICS WEST-CREE SHWE", 0x31, "UCAS"),
    c(0x1519, None, "CANADIAN SYLLABICS SHWI", 0x31, "UCAS"),
    c(0x151A, None, "CANADIAN SYLLABICS WEST-CREE SHWI", 0x31, "UCAS"),
    c(0x151B, None, "CANADIAN SYLLABICS SHWII", 0x31, "UCAS"),
    c(0x151C, None, "CANADIAN SYLLABICS WEST-CREE SHWII", 0x31, "UCAS"),
    c(0x151D, None, "CANADIAN SYLLABICS SHWO", 0x31, "UCAS"),
    c(0x151E, None, "CANADIAN SYLLABICS WEST-CREE SHWO", 0x31, "UCAS"),
    c(0x151F, None, "CANADIAN SYLLABICS SHWOO", 0x31, "UCAS"),
    c(0x1520, None, "CANADIAN SYLLABICS WEST-CREE SHWOO", 0x31, "UCAS"),
    c(0x1521, None, "CANADIAN SYLLABICS SHWA", 0x31, "UCAS"),
    c(0x1522, None, "CANADIAN SYLLABICS WEST-CREE SHWA", 0x31, "UCAS"),
    c(0x1523, None, "CANADIAN SYLLABICS SHWAA", 0x31, "UCAS"),
    c(0x1524, None, "CANADIAN SYLLABICS WEST-CREE SHWAA", 0x31, "UCAS"),
    c(0x1525, None, "CANADIAN SYLLABICS SH", 0x31, "UCAS"),
    c(0x1526, None, "CANADIAN SYLLABICS YE", 0x31, "UCAS"),
    c(0x1527, None, "CANADIAN SYLLABICS YAAI", 0x31, "UCAS"),
    c(0x1528, None, "CANADIAN SYLLABICS YI", 0x31, "UCAS"),
    c(0x1529, None, "CANADIAN SYLLABICS YII", 0x31, "UCAS"),
    c(0x152A, None, "CANADIAN SYLLABICS YO", 0x31, "UCAS"),
    c(0x152B, None, "CANADIAN SYLLABICS YOO", 0x31, "UCAS"),
    c(0x152C, None, "CANADIAN SYLLABICS Y-CREE YOO", 0x31, "UCAS"),
    c(0x152D, None, "CANADIAN SYLLABICS YA", 0x31, "UCAS"),
    c(0x152E, None, "CANADIAN SYLLABICS YAA", 0x31, "UCAS"),
    c(0x152F, None, "CANADIAN SYLLABICS YWE", 0x31, "UCAS"),
    c(0x1530, None, "CANADIAN SYLLABICS WEST-CREE YWE", 0x31, "UCAS"),
    c(0x1531, None, "CANADIAN SYLLABICS YWI", 0x31, "UCAS"),
    c(0x1532, None, "CANADIAN SYLLABICS WEST-CREE YWI", 0x31, "UCAS"),
    c(0x1533, None, "CANADIAN SYLLABICS YWII", 0x31, "UCAS"),
    c(0x1534, None, "CANADIAN SYLLABICS WEST-CREE YWII", 0x31, "UCAS"),
    c(0x1535, None, "CANADIAN SYLLABICS YWO", 0x31, "UCAS"),
    c(0x1536, None, "CANADIAN SYLLABICS WEST-CREE YWO", 0x31, "UCAS"),
    c(0x1537, None, "CANADIAN SYLLABICS YWOO", 0x31, "UCAS"),
    c(0x1538, None, "CANADIAN SYLLABICS WEST-CREE YWOO", 0x31, "UCAS"),
    c(0x1539, None, "CANADIAN SYLLABICS YWA", 0x31, "UCAS"),
    c(0x153A, None, "CANADIAN SYLLABICS WEST-CREE YWA", 0x31, "UCAS"),
    c(0x153B, None, "CANADIAN SYLLABICS YWAA", 0x31, "UCAS"),
    c(0x153C, None, "CANADIAN SYLLABICS WEST-CREE YWAA", 0x31, "UCAS"),
    c(0x153D, None, "CANADIAN SYLLABICS NASKAPI YWAA", 0x31, "UCAS"),
    c(0x153E, None, "CANADIAN SYLLABICS Y", 0x31, "UCAS"),
    c(0x153F, None, "CANADIAN SYLLABICS BIBLE-CREE Y", 0x31, "UCAS"),
    c(0x1540, None, "CANADIAN SYLLABICS WEST-CREE Y", 0x31, "UCAS"),
    c(0x1541, None, "CANADIAN SYLLABICS SAYISI YI", 0x31, "UCAS"),
    c(0x1542, None, "CANADIAN SYLLABICS RE", 0x31, "UCAS"),
    c(0x1543, None, "CANADIAN SYLLABICS R-CREE RE", 0x31, "UCAS"),
    c(0x1544, None, "CANADIAN SYLLABICS WEST-CREE LE", 0x31, "UCAS"),
    c(0x1545, None, "CANADIAN SYLLABICS RAAI", 0x31, "UCAS"),
    c(0x1546, None, "CANADIAN SYLLABICS RI", 0x31, "UCAS"),
    c(0x1547, None, "CANADIAN SYLLABICS RII", 0x31, "UCAS"),
    c(0x1548, None, "CANADIAN SYLLABICS RO", 0x31, "UCAS"),
    c(0x1549, None, "CANADIAN SYLLABICS ROO", 0x31, "UCAS"),
    c(0x154A, None, "CANADIAN SYLLABICS WEST-CREE LO", 0x31, "UCAS"),
    c(0x154B, None, "CANADIAN SYLLABICS RA", 0x31, "UCAS"),
    c(0x154C, None, "CANADIAN SYLLABICS RAA", 0x31, "UCAS"),
    c(0x154D, None, "CANADIAN SYLLABICS WEST-CREE LA", 0x31, "UCAS"),
    c(0x154E, None, "CANADIAN SYLLABICS RWAA", 0x31, "UCAS"),
    c(0x154F, None, "CANADIAN SYLLABICS WEST-CREE RWAA", 0x31, "UCAS"),
    c(0x1550, None, "CANADIAN SYLLABICS R", 0x31, "UCAS"),
    c(0x1551, None, "CANADIAN SYLLABICS WEST-CREE R", 0x31, "UCAS"),
    c(0x1552, None, "CANADIAN SYLLABICS MEDIAL R", 0x31, "UCAS"),
    c(0x1553, None, "CANADIAN SYLLABICS FE", 0x31, "UCAS"),
    c(0x1554, None, "CANADIAN SYLLABICS FAAI", 0x31, "UCAS"),
    c(0x1555, None, "CANADIAN SYLLABICS FI", 0x31, "UCAS"),
    c(0x1556, None, "CANADIAN SYLLABICS FII", 0x31, "UCAS"),
    c(0x1557, None, "CANADIAN SYLLABICS FO", 0x31, "UCAS"),
    c(0x1558, None, "CANADIAN SYLLABICS FOO", 0x31, "UCAS"),
    c(0x1559, None, "CANADIAN SYLLABICS FA", 0x31, "UCAS"),
    c(0x155A, None, "CANADIAN SYLLABICS FAA", 0x31, "UCAS"),
    c(0x155B, None, "CANADIAN SYLLABICS FWAA", 0x31, "UCAS"),
    c(0x155C, None, "CANADIAN SYLLABICS WEST-CREE FWAA", 0x31, "UCAS"),
    c(0x155D, None, "CANADIAN SYLLABICS F", 0x31, "UCAS"),
    c(0x155E, None, "CANADIAN SYLLABICS THE", 0x31, "UCAS"),
    c(0x155F, None, "CANADIAN SYLLABICS N-CREE THE", 0x31, "UCAS"),
    c(0x1560, None, "CANADIAN SYLLABICS THI", 0x31, "UCAS"),
    c(0x1561, None, "CANADIAN SYLLABICS N-CREE THI", 0x31, "UCAS"),
    c(0x1562, None, "CANADIAN SYLLABICS THII", 0x31, "UCAS"),
    c(0x1563, None, "CANADIAN SYLLABICS N-CREE THII", 0x31, "UCAS"),
    c(0x1564, None, "CANADIAN SYLLABICS THO", 0x31, "UCAS"),
    c(0x1565, None, "CANADIAN SYLLABICS THOO", 0x31, "UCAS"),
    c(0x1566, None, "CANADIAN SYLLABICS THA", 0x31, "UCAS"),
    c(0x1567, None, "CANADIAN SYLLABICS THAA", 0x31, "UCAS"),
    c(0x1568, None, "CANADIAN SYLLABICS THWAA", 0x31, "UCAS"),
    c(0x1569, None, "CANADIAN SYLLABICS WEST-CREE THWAA", 0x31, "UCAS"),
    c(0x156A, None, "CANADIAN SYLLABICS TH", 0x31, "UCAS"),
    c(0x156B, None, "CANADIAN SYLLABICS TTHE", 0x31, "UCAS"),
    c(0x156C, None, "CANADIAN SYLLABICS TTHI", 0x31, "UCAS"),
    c(0x156D, None, "CANADIAN SYLLABICS TTHO", 0x31, "UCAS"),
    c(0x156E, None, "CANADIAN SYLLABICS TTHA", 0x31, "UCAS"),
    c(0x156F, None, "CANADIAN SYLLABICS TTH", 0x31, "UCAS"),
    c(0x1570, None, "CANADIAN SYLLABICS TYE", 0x31, "UCAS"),
    c(0x1571, None, "CANADIAN SYLLABICS TYI", 0x31, "UCAS"),
    c(0x1572, None, "CANADIAN SYLLABICS TYO", 0x31, "UCAS"),
    c(0x1573, None, "CANADIAN SYLLABICS TYA", 0x31, "UCAS"),
    c(0x1574, None, "CANADIAN SYLLABICS NUNAVIK HE", 0x31, "UCAS"),
    c(0x1575, None, "CANADIAN SYLLABICS NUNAVIK HI", 0x31, "UCAS"),
    c(0x1576, None, "CANADIAN SYLLABICS NUNAVIK HII", 0x31, "UCAS"),
    c(0x1577, None, "CANADIAN SYLLABICS NUNAVIK HO", 0x31, "UCAS"),
    c(0x1578, None, "CANADIAN SYLLABICS NUNAVIK HOO", 0x31, "UCAS"),
    c(0x1579, None, "CANADIAN SYLLABICS NUNAVIK HA", 0x31, "UCAS"),
    c(0x157A, None, "CANADIAN SYLLABICS NUNAVIK HAA", 0x31, "UCAS"),
    c(0x157B, None, "CANADIAN SYLLABICS NUNAVIK H", 0x31, "UCAS"),
    c(0x157C, None, "CANADIAN SYLLABICS NUNAVUT H", 0x31, "UCAS"),
    c(0x157D, None, "CANADIAN SYLLABICS HK", 0x31, "UCAS"),
    c(0x157E, None, "CANADIAN SYLLABICS QAAI", 0x31, "UCAS"),
    c(0x157F, None, "CANADIAN SYLLABICS QI", 0x31, "UCAS"),
    c(0x1580, None, "CANADIAN SYLLABICS QII", 0x31, "UCAS"),
    c(0x1581, None, "CANADIAN SYLLABICS QO", 0x31, "UCAS"),
    c(0x1582, None, "CANADIAN SYLLABICS QOO", 0x31, "UCAS"),
    c(0x1583, None, "CANADIAN SYLLABICS QA", 0x31, "UCAS"),
    c(0x1584, None, "CANADIAN SYLLABICS QAA", 0x31, "UCAS"),
    c(0x1585, None, "CANADIAN SYLLABICS Q", 0x31, "UCAS"),
    c(0x1586, None, "CANADIAN SYLLABICS TLHE", 0x31, "UCAS"),
    c(0x1587, None, "CANADIAN SYLLABICS TLHI", 0x31, "UCAS"),
    c(0x1588, None, "CANADIAN SYLLABICS TLHO", 0x31, "UCAS"),
    c(0x1589, None, "CANADIAN SYLLABICS TLHA", 0x31, "UCAS"),
    c(0x158A, None, "CANADIAN SYLLABICS WEST-CREE RE", 0x31, "UCAS"),
    c(0x158B, None, "CANADIAN SYLLABICS WEST-CREE RI", 0x31, "UCAS"),
    c(0x158C, None, "CANADIAN SYLLABICS WEST-CREE RO", 0x31, "UCAS"),
    c(0x158D, None, "CANADIAN SYLLABICS WEST-CREE RA", 0x31, "UCAS"),
    c(0x158E, None, "CANADIAN SYLLABICS NGAAI", 0x31, "UCAS"),
    c(0x158F, None, "CANADIAN SYLLABICS NGI", 0x31, "UCAS"),
    c(0x1590, None, "CANADIAN SYLLABICS NGII", 0x31, "UCAS"),
    c(0x1591, None, "CANADIAN SYLLABICS NGO", 0x31, "UCAS"),
    c(0x1592, None, "CANADIAN SYLLABICS NGOO", 0x31, "UCAS"),
    c(0x1593, None, "CANADIAN SYLLABICS NGA", 0x31, "UCAS"),
    c(0x1594, None, "CANADIAN SYLLABICS NGAA", 0x31, "UCAS"),
    c(0x1595, None, "CANADIAN SYLLABICS NG", 0x31, "UCAS"),
    c(0x1596, None, "CANADIAN SYLLABICS NNG", 0x31, "UCAS"),
    c(0x1597, None, "CANADIAN SYLLABICS SAYISI SHE", 0x31, "UCAS"),
    c(0x1598, None, "CANADIAN SYLLABICS SAYISI SHI", 0x31, "UCAS"),
    c(0x1599, None, "CANADIAN SYLLABICS SAYISI SHO", 0x31, "UCAS"),
    c(0x159A, None, "CANADIAN SYLLABICS SAYISI SHA", 0x31, "UCAS"),
    c(0x159B, None, "CANADIAN SYLLABICS WOODS-CREE THE", 0x31, "UCAS"),
    c(0x159C, None, "CANADIAN SYLLABICS WOODS-CREE THI", 0x31, "UCAS"),
    c(0x159D, None, "CANADIAN SYLLABICS WOODS-CREE THO", 0x31, "UCAS"),
    c(0x159E, None, "CANADIAN SYLLABICS WOODS-CREE THA", 0x31, "UCAS"),
    c(0x159F, None, "CANADIAN SYLLABICS WOODS-CREE TH", 0x31, "UCAS"),
    c(0x15A0, None, "CANADIAN SYLLABICS LHI", 0x31, "UCAS"),
    c(0x15A1, None, "CANADIAN SYLLABICS LHII", 0x31, "UCAS"),
    c(0x15A2, None, "CANADIAN SYLLABICS LHO", 0x31, "UCAS"),
    c(0x15A3, None, "CANADIAN SYLLABICS LHOO", 0x31, "UCAS"),
    c(0x15A4, None, "CANADIAN SYLLABICS LHA", 0x31, "UCAS"),
    c(0x15A5, None, "CANADIAN SYLLABICS LHAA", 0x31, "UCAS"),
    c(0x15A6, None, "CANADIAN SYLLABICS LH", 0x31, "UCAS"),
    c(0x15A7, None, "CANADIAN SYLLABICS TH-CREE THE", 0x31, "UCAS"),
    c(0x15A8, None, "CANADIAN SYLLABICS TH-CREE THI", 0x31, "UCAS"),
    c(0x15A9, None, "CANADIAN SYLLABICS TH-CREE THII", 0x31, "UCAS"),
    c(0x15AA, None, "CANADIAN SYLLABICS TH-CREE THO", 0x31, "UCAS"),
    c(0x15AB, None, "CANADIAN SYLLABICS TH-CREE THOO", 0x31, "UCAS"),
    c(0x15AC, None, "CANADIAN SYLLABICS TH-CREE THA", 0x31, "UCAS"),
    c(0x15AD, None, "CANADIAN SYLLABICS TH-CREE THAA", 0x31, "UCAS"),
    c(0x15AE, None, "CANADIAN SYLLABICS TH-CREE TH", 0x31, "UCAS"),
    c(0x15AF, None, "CANADIAN SYLLABICS AIVILIK B", 0x31, "UCAS"),
    c(0x15B0, None, "CANADIAN SYLLABICS BLACKFOOT E", 0x31, "UCAS"),
    c(0x15B1, None, "CANADIAN SYLLABICS BLACKFOOT I", 0x31, "UCAS"),
    c(0x15B2, None, "CANADIAN SYLLABICS BLACKFOOT O", 0x31, "UCAS"),
    c(0x15B3, None, "CANADIAN SYLLABICS BLACKFOOT A", 0x31, "UCAS"),
    c(0x15B4, None, "CANADIAN SYLLABICS BLACKFOOT WE", 0x31, "UCAS"),
    c(0x15B5, None, "CANADIAN SYLLABICS BLACKFOOT WI", 0x31, "UCAS"),
    c(0x15B6, None, "CANADIAN SYLLABICS BLACKFOOT WO", 0x31, "UCAS"),
    c(0x15B7, None, "CANADIAN SYLLABICS BLACKFOOT WA", 0x31, "UCAS"),
    c(0x15B8, None, "CANADIAN SYLLABICS BLACKFOOT NE", 0x31, "UCAS"),
    c(0x15B9, None, "CANADIAN SYLLABICS BLACKFOOT NI", 0x31, "UCAS"),
    c(0x15BA, None, "CANADIAN SYLLABICS BLACKFOOT NO", 0x31, "UCAS"),
    c(0x15BB, None, "CANADIAN SYLLABICS BLACKFOOT NA", 0x31, "UCAS"),
    c(0x15BC, None, "CANADIAN SYLLABICS BLACKFOOT KE", 0x31, "UCAS"),
    c(0x15BD, None, "CANADIAN SYLLABICS BLACKFOOT KI", 0x31, "UCAS"),
    c(0x15BE, None, "CANADIAN SYLLABICS BLACKFOOT KO", 0x31, "UCAS"),
    c(0x15BF, None, "CANADIAN SYLLABICS BLACKFOOT KA", 0x31, "UCAS"),
    c(0x15C0, None, "CANADIAN SYLLABICS SAYISI HE", 0x31, "UCAS"),
    c(0x15C1, None, "CANADIAN SYLLABICS SAYISI HI", 0x31, "UCAS"),
    c(0x15C2, None, "CANADIAN SYLLABICS SAYISI HO", 0x31, "UCAS"),
    c(0x15C3, None, "CANADIAN SYLLABICS SAYISI HA", 0x31, "UCAS"),
    c(0x15C4, None, "CANADIAN SYLLABICS CARRIER GHU", 0x31, "UCAS"),
    c(0x15C5, None, "CANADIAN SYLLABICS CARRIER GHO", 0x31, "UCAS"),
    c(0x15C6, None, "CANADIAN SYLLABICS CARRIER GHE", 0x31, "UCAS"),
    c(0x15C7, None, "CANADIAN SYLLABICS CARRIER GHEE", 0x31, "UCAS"),
    c(0x15C8, None, "CANADIAN SYLLABICS CARRIER GHI", 0x31, "UCAS"),
    c(0x15C9, None, "CANADIAN SYLLABICS CARRIER GHA", 0x31, "UCAS"),
    c(0x15CA, None, "CANADIAN SYLLABICS CARRIER RU", 0x31, "UCAS"),
    c(0x15CB, None, "CANADIAN SYLLABICS CARRIER RO", 0x31, "UCAS"),
    c(0x15CC, None, "CANADIAN SYLLABICS CARRIER RE", 0x31, "UCAS"),
    c(0x15CD, None, "CANADIAN SYLLABICS CARRIER REE", 0x31, "UCAS"),
    c(0x15CE, None, "CANADIAN SYLLABICS CARRIER RI", 0x31, "UCAS"),
    c(0x15CF, None, "CANADIAN SYLLABICS CARRIER RA", 0x31, "UCAS"),
    c(0x15D0, None, "CANADIAN SYLLABICS CARRIER WU", 0x31, "UCAS"),
    c(0x15D1, None, "CANADIAN SYLLABICS CARRIER WO", 0x31, "UCAS"),
    c(0x15D2, None, "CANADIAN SYLLABICS CARRIER WE", 0x31, "UCAS"),
    c(0x15D3, None, "CANADIAN SYLLABICS CARRIER WEE", 0x31, "UCAS"),
    c(0x15D4, None, "CANADIAN SYLLABICS CARRIER WI", 0x31, "UCAS"),
    c(0x15D5, None, "CANADIAN SYLLABICS CARRIER WA", 0x31, "UCAS"),
    c(0x15D6, None, "CANADIAN SYLLABICS CARRIER HWU", 0x31, "UCAS"),
    c(0x15D7, None, "CANADIAN SYLLABICS CARRIER HWO", 0x31, "UCAS"),
    c(0x15D8, None, "CANADIAN SYLLABICS CARRIER HWE", 0x31, "UCAS"),
    c(0x15D9, None, "CANADIAN SYLLABICS CARRIER HWEE", 0x31, "UCAS"),
    c(0x15DA, None, "CANADIAN SYLLABICS CARRIER HWI", 0x31, "UCAS"),
    c(0x15DB, None, "CANADIAN SYLLABICS CARRIER HWA", 0x31, "UCAS"),
    c(0x15DC, None, "CANADIAN SYLLABICS CARRIER THU", 0x31, "UCAS"),
    c(0x15DD, None, "CANADIAN SYLLABICS CARRIER THO", 0x31, "UCAS"),
    c(0x15DE, None, "CANADIAN SYLLABICS CARRIER THE", 0x31, "UCAS"),
    c(0x15DF, None, "CANADIAN SYLLABICS CARRIER THEE", 0x31, "UCAS"),
    c(0x15E0, None, "CANADIAN SYLLABICS CARRIER THI", 0x31, "UCAS"),
    c(0x15E1, None, "CANADIAN SYLLABICS CARRIER THA", 0x31, "UCAS"),
    c(0x15E2, None, "CANADIAN SYLLABICS CARRIER TTU", 0x31, "UCAS"),
    c(0x15E3, None, "CANADIAN SYLLABICS CARRIER TTO", 0x31, "UCAS"),
    c(0x15E4, None, "CANADIAN SYLLABICS CARRIER TTE", 0x31, "UCAS"),
    c(0x15E5, None, "CANADIAN SYLLABICS CARRIER TTEE", 0x31, "UCAS"),
    c(0x15E6, None, "CANADIAN SYLLABICS CARRIER TTI", 0x31, "UCAS"),
    c(0x15E7, None, "CANADIAN SYLLABICS CARRIER TTA", 0x31, "UCAS"),
    c(0x15E8, None, "CANADIAN SYLLABICS CARRIER PU", 0x31, "UCAS"),
    c(0x15E9, None, "CANADIAN SYLLABICS CARRIER PO", 0x31, "UCAS"),
    c(0x15EA, None, "CANADIAN SYLLABICS CARRIER PE", 0x31, "UCAS"),
    c(0x15EB, None, "CANADIAN SYLLABICS CARRIER PEE", 0x31, "UCAS"),
    c(0x15EC, None, "CANADIAN SYLLABICS CARRIER PI", 0x31, "UCAS"),
    c(0x15ED, None, "CANADIAN SYLLABICS CARRIER PA", 0x31, "UCAS"),
    c(0x15EE, None, "CANADIAN SYLLABICS CARRIER P", 0x31, "UCAS"),
    c(0x15EF, None, "CANADIAN SYLLABICS CARRIER GU", 0x31, "UCAS"),
    c(0x15F0, None, "CANADIAN SYLLABICS CARRIER GO", 0x31, "UCAS"),
    c(0x15F1, None, "CANADIAN SYLLABICS CARRIER GE", 0x31, "UCAS"),
    c(0x15F2, None, "CANADIAN SYLLABICS CARRIER GEE", 0x31, "UCAS"),
    c(0x15F3, None, "CANADIAN SYLLABICS CARRIER GI", 0x31, "UCAS"),
    c(0x15F4, None, "CANADIAN SYLLABICS CARRIER GA", 0x31, "UCAS"),
    c(0x15F5, None, "CANADIAN SYLLABICS CARRIER KHU", 0x31, "UCAS"),
    c(0x15F6, None, "CANADIAN SYLLABICS CARRIER KHO", 0x31, "UCAS"),
    c(0x15F7, None, "CANADIAN SYLLABICS CARRIER KHE", 0x31, "UCAS"),
    c(0x15F8, None, "CANADIAN SYLLABICS CARRIER KHEE", 0x31, "UCAS"),
    c(0x15F9, None, "CANADIAN SYLLABICS CARRIER KHI", 0x31, "UCAS"),
    c(0x15FA, None, "CANADIAN SYLLABICS CARRIER KHA", 0x31, "UCAS"),
    c(0x15FB, None, "CANADIAN SYLLABICS CARRIER KKU", 0x31, "UCAS"),
    c(0x15FC, None, "CANADIAN SYLLABICS CARRIER KKO", 0x31, "UCAS"),
    c(0x15FD, None, "CANADIAN SYLLABICS CARRIER KKE", 0x31, "UCAS"),
    c(0x15FE, None, "CANADIAN SYLLABICS CARRIER KKEE", 0x31, "UCAS"),
    c(0x15FF, None, "CANADIAN SYLLABICS CARRIER KKI", 0x31, "UCAS"),
    c(0x1600, None, "CANADIAN SYLLABICS CARRIER KKA", 0x31, "UCAS"),
    c(0x1601, None, "CANADIAN SYLLABICS CARRIER KK", 0x31, "UCAS"),
    c(0x1602, None, "CANADIAN SYLLABICS CARRIER NU", 0x31, "UCAS"),
    c(0x1603, None, "CANADIAN SYLLABICS CARRIER NO", 0x31, "UCAS"),
    c(0x1604, None, "CANADIAN SYLLABICS CARRIER NE", 0x31, "UCAS"),
    c(0x1605, None, "CANADIAN SYLLABICS CARRIER NEE", 0x31, "UCAS"),
    c(0x1606, None, "CANADIAN SYLLABICS CARRIER NI", 0x31, "UCAS"),
    c(0x1607, None, "CANADIAN SYLLABICS CARRIER NA", 0x31, "UCAS"),
    c(0x1608, None, "CANADIAN SYLLABICS CARRIER MU", 0x31, "UCAS"),
    c(0x1609, None, "CANADIAN SYLLABICS CARRIER MO", 0x31, "UCAS"),
    c(0x160A, None, "CANADIAN SYLLABICS CARRIER ME", 0x31, "UCAS"),
    c(0x160B, None, "CANADIAN SYLLABICS CARRIER MEE", 0x31, "UCAS"),
    c(0x160C, None, "CANADIAN SYLLABICS CARRIER MI", 0x31, "UCAS"),
    c(0x160D, None, "CANADIAN SYLLABICS CARRIER MA", 0x31, "UCAS"),
    c(0x160E, None, "CANADIAN SYLLABICS CARRIER YU", 0x31, "UCAS"),
    c(0x160F, None, "CANADIAN SYLLABICS CARRIER YO", 0x31, "UCAS"),
    c(0x1610, None, "CANADIAN SYLLABICS CARRIER YE", 0x31, "UCAS"),
    c(0x1611, None, "CANADIAN SYLLABICS CARRIER YEE", 0x31, "UCAS"),
    c(0x1612, None, "CANADIAN SYLLABICS CARRIER YI", 0x31, "UCAS"),
    c(0x1613, None, "CANADIAN SYLLABICS CARRIER YA", 0x31, "UCAS"),
    c(0x1614, None, "CANADIAN SYLLABICS CARRIER JU", 0x31, "UCAS"),
    c(0x1615, None, "CANADIAN SYLLABICS SAYISI JU", 0x31, "UCAS"),
    c(0x1616, None, "CANADIAN SYLLABICS CARRIER JO", 0x31, "UCAS"),
    c(0x1617, None, "CANADIAN SYLLABICS CARRIER JE", 0x31, "UCAS"),
    c(0x1618, None, "CANADIAN SYLLABICS CARRIER JEE", 0x31, "UCAS"),
    c(0x1619, None, "CANADIAN SYLLABICS CARRIER JI", 0x31, "UCAS"),
    c(0x161A, None, "CANADIAN SYLLABICS SAYISI JI", 0x31, "UCAS"),
    c(0x161B, None, "CANADIAN SYLLABICS CARRIER JA", 0x31, "UCAS"),
    c(0x161C, None, "CANADIAN SYLLABICS CARRIER JJU", 0x31, "UCAS"),
    c(0x161D, None, "CANADIAN SYLLABICS CARRIER JJO", 0x31, "UCAS"),
    c(0x161E, None, "CANADIAN SYLLABICS CARRIER JJE", 0x31, "UCAS"),
    c(0x161F, None, "CANADIAN SYLLABICS CARRIER JJEE", 0x31, "UCAS"),
    c(0x1620, None, "CANADIAN SYLLABICS CARRIER JJI", 0x31, "UCAS"),
    c(0x1621, None, "CANADIAN SYLLABICS CARRIER JJA", 0x31, "UCAS"),
    c(0x1622, None, "CANADIAN SYLLABICS CARRIER LU", 0x31, "UCAS"),
    c(0x1623, None, "CANADIAN SYLLABICS CARRIER LO", 0x31, "UCAS"),
    c(0x1624, None, "CANADIAN SYLLABICS CARRIER LE", 0x31, "UCAS"),
    c(0x1625, None, "CANADIAN SYLLABICS CARRIER LEE", 0x31, "UCAS"),
    c(0x1626, None, "CANADIAN SYLLABICS CARRIER LI", 0x31, "UCAS"),
    c(0x1627, None, "CANADIAN SYLLABICS CARRIER LA", 0x31, "UCAS"),
    c(0x1628, None, "CANADIAN SYLLABICS CARRIER DLU", 0x31, "UCAS"),
    c(0x1629, None, "CANADIAN SYLLABICS CARRIER DLO", 0x31, "UCAS"),
    c(0x162A, None, "CANADIAN SYLLABICS CARRIER DLE", 0x31, "UCAS"),
    c(0x162B, None, "CANADIAN SYLLABICS CARRIER DLEE", 0x31, "UCAS"),
    c(0x162C, None, "CANADIAN SYLLABICS CARRIER DLI", 0x31, "UCAS"),
    c(0x162D, None, "CANADIAN SYLLABICS CARRIER DLA", 0x31, "UCAS"),
    c(0x162E, None, "CANADIAN SYLLABICS CARRIER LHU", 0x31, "UCAS"),
    c(0x162F, None, "CANADIAN SYLLABICS CARRIER LHO", 0x31, "UCAS"),
    c(0x1630, None, "CANADIAN SYLLABICS CARRIER LHE", 0x31, "UCAS"),
    c(0x1631, None, "CANADIAN SYLLABICS CARRIER LHEE", 0x31, "UCAS"),
    c(0x1632, None, "CANADIAN SYLLABICS CARRIER LHI", 0x31, "UCAS"),
    c(0x1633, None, "CANADIAN SYLLABICS CARRIER LHA", 0x31, "UCAS"),
    c(0x1634, None, "CANADIAN SYLLABICS CARRIER TLHU", 0x31, "UCAS"),
    c(0x1635, None, "CANADIAN SYLLABICS CARRIER TLHO", 0x31, "UCAS"),
    c(0x1636, None, "CANADIAN SYLLABICS CARRIER TLHE", 0x31, "UCAS"),
    c(0x1637, None, "CANADIAN SYLLABICS CARRIER TLHEE", 0x31, "UCAS"),
    c(0x1638, None, "CANADIAN SYLLABICS CARRIER TLHI", 0x31, "UCAS"),
    c(0x1639, None, "CANADIAN SYLLABICS CARRIER TLHA", 0x31, "UCAS"),
    c(0x163A, None, "CANADIAN SYLLABICS CARRIER TLU", 0x31, "UCAS"),
    c(0x163B, None, "CANADIAN SYLLABICS CARRIER TLO", 0x31, "UCAS"),
    c(0x163C, None, "CANADIAN SYLLABICS CARRIER TLE", 0x31, "UCAS"),
    c(0x163D, None, "CANADIAN SYLLABICS CARRIER TLEE", 0x31, "UCAS"),
    c(0x163E, None, "CANADIAN SYLLABICS CARRIER TLI", 0x31, "UCAS"),
    c(0x163F, None, "CANADIAN SYLLABICS CARRIER TLA", 0x31, "UCAS"),
    c(0x1640, None, "CANADIAN SYLLABICS CARRIER ZU", 0x31, "UCAS"),
    c(0x1641, None, "CANADIAN SYLLABICS CARRIER ZO", 0x31, "UCAS"),
    c(0x1642, None, "CANADIAN SYLLABICS CARRIER ZE", 0x31, "UCAS"),
    c(0x1643, None, "CANADIAN SYLLABICS CARRIER ZEE", 0x31, "UCAS"),
    c(0x1644, None, "CANADIAN SYLLABICS CARRIER ZI", 0x31, "UCAS"),
    c(0x1645, None, "CANADIAN SYLLABICS CARRIER ZA", 0x31, "UCAS"),
    c(0x1646, None, "CANADIAN SYLLABICS CARRIER Z", 0x31, "UCAS"),
    c(0x1647, None, "CANADIAN SYLLABICS CARRIER INITIAL Z", 0x31, "UCAS"),
    c(0x1648, None, "CANADIAN SYLLABICS CARRIER DZU", 0x31, "UCAS"),
    c(0x1649, None, "CANADIAN SYLLABICS CARRIER DZO", 0x31, "UCAS"),
    c(0x164A, None, "CANADIAN SYLLABICS CARRIER DZE", 0x31, "UCAS"),
    c(0x164B, None, "CANADIAN SYLLABICS CARRIER DZEE", 0x31, "UCAS"),
    c(0x164C, None, "CANADIAN SYLLABICS CARRIER DZI", 0x31, "UCAS"),
    c(0x164D, None, "CANADIAN SYLLABICS CARRIER DZA", 0x31, "UCAS"),
    c(0x164E, None, "CANADIAN SYLLABICS CARRIER SU", 0x31, "UCAS"),
    c(0x164F, None, "CANADIAN SYLLABICS CARRIER SO", 0x31, "UCAS"),
    c(0x1650, None, "CANADIAN SYLLABICS CARRIER SE", 0x31, "UCAS"),
    c(0x1651, None, "CANADIAN SYLLABICS CARRIER SEE", 0x31, "UCAS"),
    c(0x1652, None, "CANADIAN SYLLABICS CARRIER SI", 0x31, "UCAS"),
    c(0x1653, None, "CANADIAN SYLLABICS CARRIER SA", 0x31, "UCAS"),
    c(0x1654, None, "CANADIAN SYLLABICS CARRIER SHU", 0x31, "UCAS"),
    c(0x1655, None, "CANADIAN SYLLABICS CARRIER SHO", 0x31, "UCAS"),
    c(0x1656, None, "CANADIAN SYLLABICS CARRIER SHE", 0x31, "UCAS"),
    c(0x1657, None, "CANADIAN SYLLABICS CARRIER SHEE", 0x31, "UCAS"),
    c(0x1658, None, "CANADIAN SYLLABICS CARRIER SHI", 0x31, "UCAS"),
    c(0x1659, None, "CANADIAN SYLLABICS CARRIER SHA", 0x31, "UCAS"),
    c(0x165A, None, "CANADIAN SYLLABICS CARRIER SH", 0x31, "UCAS"),
    c(0x165B, None, "CANADIAN SYLLABICS CARRIER TSU", 0x31, "UCAS"),
    c(0x165C, None, "CANADIAN SYLLABICS CARRIER TSO", 0x31, "UCAS"),
    c(0x165D, None, "CANADIAN SYLLABICS CARRIER TSE", 0x31, "UCAS"),
    c(0x165E, None, "CANADIAN SYLLABICS CARRIER TSEE", 0x31, "UCAS"),
    c(0x165F, None, "CANADIAN SYLLABICS CARRIER TSI", 0x31, "UCAS"),
    c(0x1660, None, "CANADIAN SYLLABICS CARRIER TSA", 0x31, "UCAS"),
    c(0x1661, None, "CANADIAN SYLLABICS CARRIER CHU", 0x31, "UCAS"),
    c(0x1662, None, "CANADIAN SYLLABICS CARRIER CHO", 0x31, "UCAS"),
    c(0x1663, None, "CANADIAN SYLLABICS CARRIER CHE", 0x31, "UCAS"),
    c(0x1664, None, "CANADIAN SYLLABICS CARRIER CHEE", 0x31, "UCAS"),
    c(0x1665, None, "CANADIAN SYLLABICS CARRIER CHI", 0x31, "UCAS"),
    c(0x1666, None, "CANADIAN SYLLABICS CARRIER CHA", 0x31, "UCAS"),
    c(0x1667, None, "CANADIAN SYLLABICS CARRIER TTSU", 0x31, "UCAS"),
    c(0x1668, None, "CANADIAN SYLLABICS CARRIER TTSO", 0x31, "UCAS"),
    c(0x1669, None, "CANADIAN SYLLABICS CARRIER TTSE", 0x31, "UCAS"),
    c(0x166A, None, "CANADIAN SYLLABICS CARRIER TTSEE", 0x31, "UCAS"),
    c(0x166B, None, "CANADIAN SYLLABICS CARRIER TTSI", 0x31, "UCAS"),
    c(0x166C, None, "CANADIAN SYLLABICS CARRIER TTSA", 0x31, "UCAS"),
    c(0x166D, None, "CANADIAN SYLLABICS CHI SIGN", 0x00, "UCAS"),
    c(0x166E, None, "CANADIAN SYLLABICS FULL STOP", 0x00, "UCAS"),
    c(0x166F, None, "CANADIAN SYLLABICS QAI", 0x31, "UCAS"),
    c(0x1670, None, "CANADIAN SYLLABICS NGAI", 0x31, "UCAS"),
    c(0x1671, None, "CANADIAN SYLLABICS NNGI", 0x31, "UCAS"),
    c(0x1672, None, "CANADIAN SYLLABICS NNGII", 0x31, "UCAS"),
    c(0x1673, None, "CANADIAN SYLLABICS NNGO", 0x31, "UCAS"),
    c(0x1674, None, "CANADIAN SYLLABICS NNGOO", 0x31, "UCAS"),
    c(0x1675, None, "CANADIAN SYLLABICS NNGA", 0x31, "UCAS"),
    c(0x1676, None, "CANADIAN SYLLABICS NNGAA", 0x31, "UCAS"),
    c(0x1677, None, "CANADIAN SYLLABICS WOODS-CREE THWEE", 0x31, "UCAS"),
    c(0x1678, None, "CANADIAN SYLLABICS WOODS-CREE THWI", 0x31, "UCAS"),
    c(0x1679, None, "CANADIAN SYLLABICS WOODS-CREE THWII", 0x31, "UCAS"),
    c(0x167A, None, "CANADIAN SYLLABICS WOODS-CREE THWO", 0x31, "UCAS"),
    c(0x167B, None, "CANADIAN SYLLABICS WOODS-CREE THWOO", 0x31, "UCAS"),
    c(0x167C, None, "CANADIAN SYLLABICS WOODS-CREE THWA", 0x31, "UCAS"),
    c(0x167D, None, "CANADIAN SYLLABICS WOODS-CREE THWAA", 0x31, "UCAS"),
    c(0x167E, None, "CANADIAN SYLLABICS WOODS-CREE FINAL TH", 0x31, "UCAS"),
    c(0x167F, None, "CANADIAN SYLLABICS BLACKFOOT W", 0x31, "UCAS"),
    c(0x1680, None, "OGHAM SPACE MARK", 0x00, "Ogham"),
    c(0x1681, None, "OGHAM LETTER BEITH", 0x31, "Ogham"),
    c(0x1682, None, "OGHAM LETTER LUIS", 0x31, "Ogham"),
    c(0x1683, None, "OGHAM LETTER FEARN", 0x31, "Ogham"),
    c(0x1684, None, "OGHAM LETTER SAIL", 0x31, "Ogham"),
    c(0x1685, None, "OGHAM LETTER NION", 0x31, "Ogham"),
    c(0x1686, None, "OGHAM LETTER UATH", 0x31, "Ogham"),
    c(0x1687, None, "OGHAM LETTER DAIR", 0x31, "Ogham"),
    c(0x1688, None, "OGHAM LETTER TINNE", 0x31, "Ogham"),
    c(0x1689, None, "OGHAM LETTER COLL", 0x31, "Ogham"),
    c(0x168A, None, "OGHAM LETTER CEIRT", 0x31, "Ogham"),
    c(0x168B, None, "OGHAM LETTER MUIN", 0x31, "Ogham"),
    c(0x168C, None, "OGHAM LETTER GORT", 0x31, "Ogham"),
    c(0x168D, None, "OGHAM LETTER NGEADAL", 0x31, "Ogham"),
    c(0x168E, None, "OGHAM LETTER STRAIF", 0x31, "Ogham"),
    c(0x168F, None, "OGHAM LETTER RUIS", 0x31, "Ogham"),
    c(0x1690, None, "OGHAM LETTER AILM", 0x31, "Ogham"),
    c(0x1691, None, "OGHAM LETTER ONN", 0x31, "Ogham"),
    c(0x1692, None, "OGHAM LETTER UR", 0x31, "Ogham"),
    c(0x1693, None, "OGHAM LETTER EADHADH", 0x31, "Ogham"),
    c(0x1694, None, "OGHAM LETTER IODHADH", 0x31, "Ogham"),
    c(0x1695, None, "OGHAM LETTER EABHADH", 0x31, "Ogham"),
    c(0x1696, None, "OGHAM LETTER OR", 0x31, "Ogham"),
    c(0x1697, None, "OGHAM LETTER UILLEANN", 0x31, "Ogham"),
    c(0x1698, None, "OGHAM LETTER IFIN", 0x31, "Ogham"),
    c(0x1699, None, "OGHAM LETTER EAMHANCHOLL", 0x31, "Ogham"),
    c(0x169A, None, "OGHAM LETTER PEITH", 0x31, "Ogham"),
    c(0x169B, None, "OGHAM FEATHER MARK", 0x00, "Ogham"),
    c(0x169C, None, "OGHAM REVERSED FEATHER MARK", 0x00, "Ogham"),
    c(0x16A0, None, "RUNIC LETTER FEHU FEOH FE F", 0x31, "Runic"),
    c(0x16A1, None, "RUNIC LETTER V", 0x31, "Runic"),
    c(0x16A2, None, "RUNIC LETTER URUZ UR U", 0x31, "Runic"),
    c(0x16A3, None, "RUNIC LETTER YR", 0x31, "Runic"),
    c(0x16A4, None, "RUNIC LETTER Y", 0x31, "Runic"),
    c(0x16A5, None, "RUNIC LETTER W", 0x31, "Runic"),
    c(0x16A6, None, "RUNIC LETTER THURISAZ THURS THORN", 0x31, "Runic"),
    c(0x16A7, None, "RUNIC LETTER ETH", 0x31, "Runic"),
    c(0x16A8, None, "RUNIC LETTER ANSUZ A", 0x31, "Runic"),
    c(0x16A9, None, "RUNIC LETTER OS O", 0x31, "Runic"),
    c(0x16AA, None, "RUNIC LETTER AC A", 0x31, "Runic"),
    c(0x16AB, None, "RUNIC LETTER AESC", 0x31, "Runic"),
    c(0x16AC, None, "RUNIC LETTER LONG-BRANCH-OSS O", 0x31, "Runic"),
    c(0x16AD, None, "RUNIC LETTER SHORT-TWIG-OSS O", 0x31, "Runic"),
    c(0x16AE, None, "RUNIC LETTER O", 0x31, "Runic"),
    c(0x16AF, None, "RUNIC LETTER OE", 0x31, "Runic"),
    c(0x16B0, None, "RUNIC LETTER ON", 0x31, "Runic"),
    c(0x16B1, None, "RUNIC LETTER RAIDO RAD REID R", 0x31, "Runic"),
    c(0x16B2, None, "RUNIC LETTER KAUNA", 0x31, "Runic"),
    c(0x16B3, None, "RUNIC LETTER CEN", 0x31, "Runic"),
    c(0x16B4, None, "RUNIC LETTER KAUN K", 0x31, "Runic"),
    c(0x16B5, None, "RUNIC LETTER G", 0x31, "Runic"),
    c(0x16B6, None, "RUNIC LETTER ENG", 0x31, "Runic"),
    c(0x16B7, None, "RUNIC LETTER GEBO GYFU G", 0x31, "Runic"),
    c(0x16B8, None, "RUNIC LETTER GAR", 0x31, "Runic"),
    c(0x16B9, None, "RUNIC LETTER WUNJO WYNN W", 0x31, "Runic"),
    c(0x16BA, None, "RUNIC LETTER HAGLAZ H", 0x31, "Runic"),
    c(0x16BB, None, "RUNIC LETTER HAEGL H", 0x31, "Runic"),
    c(0x16BC, None, "RUNIC LETTER LONG-BRANCH-HAGALL H", 0x31, "Runic"),
    c(0x16BD, None, "RUNIC LETTER SHORT-TWIG-HAGALL H", 0x31, "Runic"),
    c(0x16BE, None, "RUNIC LETTER NAUDIZ NYD NAUD N", 0x31, "Runic"),
    c(0x16BF, None, "RUNIC LETTER SHORT-TWIG-NAUD N", 0x31, "Runic"),
    c(0x16C0, None, "RUNIC LETTER DOTTED-N", 0x31, "Runic"),
    c(0x16C1, None, "RUNIC LETTER ISAZ IS ISS I", 0x31, "Runic"),
    c(0x16C2, None, "RUNIC LETTER E", 0x31, "Runic"),
    c(0x16C3, None, "RUNIC LETTER JERAN J", 0x31, "Runic"),
    c(0x16C4, None, "RUNIC LETTER GER", 0x31, "Runic"),
    c(0x16C5, None, "RUNIC LETTER LONG-BRANCH-AR AE", 0x31, "Runic"),
    c(0x16C6, None, "RUNIC LETTER SHORT-TWIG-AR A", 0x31, "Runic"),
    c(0x16C7, None, "RUNIC LETTER IWAZ EOH", 0x31, "Runic"),
    c(0x16C8, None, "RUNIC LETTER PERTHO PEORTH P", 0x31, "Runic"),
    c(0x16C9, None, "RUNIC LETTER ALGIZ EOLHX", 0x31, "Runic"),
    c(0x16CA, None, "RUNIC LETTER SOWILO S", 0x31, "Runic"),
    c(0x16CB, None, "RUNIC LETTER SIGEL LONG-BRANCH-SOL S", 0x31, "Runic"),
    c(0x16CC, None, "RUNIC LETTER SHORT-TWIG-SOL S", 0x31, "Runic"),
    c(0x16CD, None, "RUNIC LETTER C", 0x31, "Runic"),
    c(0x16CE, None, "RUNIC LETTER Z", 0x31, "Runic"),
    c(0x16CF, None, "RUNIC LETTER TIWAZ TIR TYR T", 0x31, "Runic"),
    c(0x16D0, None, "RUNIC LETTER SHORT-TWIG-TYR T", 0x31, "Runic"),
    c(0x16D1, None, "RUNIC LETTER D", 0x31, "Runic"),
    c(0x16D2, None, "RUNIC LETTER BERKANAN BEORC BJARKAN B", 0x31, "Runic"),
    c(0x16D3, None, "RUNIC LETTER SHORT-TWIG-BJARKAN B", 0x31, "Runic"),
    c(0x16D4, None, "RUNIC LETTER DOTTED-P", 0x31, "Runic"),
    c(0x16D5, None, "RUNIC LETTER OPEN-P", 0x31, "Runic"),
    c(0x16D6, None, "RUNIC LETTER EHWAZ EH E", 0x31, "Runic"),
    c(0x16D7, None, "RUNIC LETTER MANNAZ MAN M", 0x31, "Runic"),
    c(0x16D8, None, "RUNIC LETTER LONG-BRANCH-MADR M", 0x31, "Runic"),
    c(0x16D9, None, "RUNIC LETTER SHORT-TWIG-MADR M", 0x31, "Runic"),
    c(0x16DA, None, "RUNIC LETTER LAUKAZ LAGU LOGR L", 0x31, "Runic"),
    c(0x16DB, None, "RUNIC LETTER DOTTED-L", 0x31, "Runic"),
    c(0x16DC, None, "RUNIC LETTER INGWAZ", 0x31, "Runic"),
    c(0x16DD, None, "RUNIC LETTER ING", 0x31, "Runic"),
    c(0x16DE, None, "RUNIC LETTER DAGAZ DAEG D", 0x31, "Runic"),
    c(0x16DF, None, "RUNIC LETTER OTHALAN ETHEL O", 0x31, "Runic"),
    c(0x16E0, None, "RUNIC LETTER EAR", 0x31, "Runic"),
    c(0x16E1, None, "RUNIC LETTER IOR", 0x31, "Runic"),
    c(0x16E2, None, "RUNIC LETTER CWEORTH", 0x31, "Runic"),
    c(0x16E3, None, "RUNIC LETTER CALC", 0x31, "Runic"),
    c(0x16E4, None, "RUNIC LETTER CEALC", 0x31, "Runic"),
    c(0x16E5, None, "RUNIC LETTER STAN", 0x31, "Runic"),
    c(0x16E6, None, "RUNIC LETTER LONG-BRANCH-YR", 0x31, "Runic"),
    c(0x16E7, None, "RUNIC LETTER SHORT-TWIG-YR", 0x31, "Runic"),
    c(0x16E8, None, "RUNIC LETTER ICELANDIC-YR", 0x31, "Runic"),
    c(0x16E9, None, "RUNIC LETTER Q", 0x31, "Runic"),
    c(0x16EA, None, "RUNIC LETTER X", 0x31, "Runic"),
    c(0x16EB, None, "RUNIC SINGLE PUNCTUATION", 0x00, "Runic"),
    c(0x16EC, None, "RUNIC MULTIPLE PUNCTUATION", 0x00, "Runic"),
    c(0x16ED, None, "RUNIC CROSS PUNCTUATION", 0x00, "Runic"),
    c(0x16EE, None, "RUNIC ARLAUG SYMBOL", 0x31, "Runic"),
    c(0x16EF, None, "RUNIC TVIMADUR SYMBOL", 0x31, "Runic"),
    c(0x16F0, None, "RUNIC BELGTHOR SYMBOL", 0x31, "Runic"),
    c(0x16F1, None, "RUNIC LETTER K", 0x31, "Runic"),
    c(0x16F2, None, "RUNIC LETTER SH", 0x31, "Runic"),
    c(0x16F3, None, "RUNIC LETTER OO", 0x31, "Runic"),
    c(0x16F4, None, "RUNIC LETTER FRANKS CASKET OS", 0x31, "Runic"),
    c(0x16F5, None, "RUNIC LETTER FRANKS CASKET IS", 0x31, "Runic"),
    c(0x16F6, None, "RUNIC LETTER FRANKS CASKET EH", 0x31, "Runic"),
    c(0x16F7, None, "RUNIC LETTER FRANKS CASKET AC", 0x31, "Runic"),
    c(0x16F8, None, "RUNIC LETTER FRANKS CASKET AESC", 0x31, "Runic"),
    c(0x1700, None, "TAGALOG LETTER A", 0x31, "Tagalog"),
    c(0x1701, None, "TAGALOG LETTER I", 0x31, "Tagalog"),
    c(0x1702, None, "TAGALOG LETTER U", 0x31, "Tagalog"),
    c(0x1703, None, "TAGALOG LETTER KA", 0x31, "Tagalog"),
    c(0x1704, None, "TAGALOG LETTER GA", 0x31, "Tagalog"),
    c(0x1705, None, "TAGALOG LETTER NGA", 0x31, "Tagalog"),
    c(0x1706, None, "TAGALOG LETTER TA", 0x31, "Tagalog"),
    c(0x1707, None, "TAGALOG LETTER DA", 0x31, "Tagalog"),
    c(0x1708, None, "TAGALOG LETTER NA", 0x31, "Tagalog"),
    c(0x1709, None, "TAGALOG LETTER PA", 0x31, "Tagalog"),
    c(0x170A, None, "TAGALOG LETTER BA", 0x31, "Tagalog"),
    c(0x170B, None, "TAGALOG LETTER MA", 0x31, "Tagalog"),
    c(0x170C, None, "TAGALOG LETTER YA", 0x31, "Tagalog"),
    c(0x170D, None, "TAGALOG LETTER RA", 0x31, "Tagalog"),
    c(0x170E, None, "TAGALOG LETTER LA", 0x31, "Tagalog"),
    c(0x170F, None, "TAGALOG LETTER WA", 0x31, "Tagalog"),
    c(0x1710, None, "TAGALOG LETTER SA", 0x31, "Tagalog"),
    c(0x1711, None, "TAGALOG LETTER HA", 0x31, "Tagalog"),
    c(0x1712, None, "TAGALOG VOWEL SIGN I", 0x21, "Tagalog"),
    c(0x1713, None, "TAGALOG VOWEL SIGN U", 0x21, "Tagalog"),
    c(0x1714, None, "TAGALOG SIGN VIRAMA", 0x20, "Tagalog"),
    c(0x1715, None, "TAGALOG SIGN PAMUDPOD", 0x20, "Tagalog"),
    c(0x171F, None, "TAGALOG LETTER ARCHAIC RA", 0x31, "Tagalog"),
    c(0x1720, None, "HANUNOO LETTER A", 0x31, "Hanunoo"),
    c(0x1721, None, "HANUNOO LETTER I", 0x31, "Hanunoo"),
    c(0x1722, None, "HANUNOO LETTER U", 0x31, "Hanunoo"),
    c(0x1723, None, "HANUNOO LETTER KA", 0x31, "Hanunoo"),
    c(0x1724, None, "HANUNOO LETTER GA", 0x31, "Hanunoo"),
    c(0x1725, None, "HANUNOO LETTER NGA", 0x31, "Hanunoo"),
    c(0x1726, None, "HANUNOO LETTER TA", 0x31, "Hanunoo"),
    c(0x1727, None, "HANUNOO LETTER DA", 0x31, "Hanunoo"),
    c(0x1728, None, "HANUNOO LETTER NA", 0x31, "Hanunoo"),
    c(0x1729, None, "HANUNOO LETTER PA", 0x31, "Hanunoo"),
    c(0x172A, None, "HANUNOO LETTER BA", 0x31, "Hanunoo"),
    c(0x172B, None, "HANUNOO LETTER MA", 0x31, "Hanunoo"),
    c(0x172C, None, "HANUNOO LETTER YA", 0x31, "Hanunoo"),
    c(0x172D, None, "HANUNOO LETTER RA", 0x31, "Hanunoo"),
    c(0x172E, None, "HANUNOO LETTER LA", 0x31, "Hanunoo"),
    c(0x172F, None, "HANUNOO LETTER WA", 0x31, "Hanunoo"),
    c(0x1730, None, "HANUNOO LETTER SA", 0x31, "Hanunoo"),
    c(0x1731, None, "HANUNOO LETTER HA", 0x31, "Hanunoo"),
    c(0x1732, None, "HANUNOO VOWEL SIGN I", 0x21, "Hanunoo"),
    c(0x1733, None, "HANUNOO VOWEL SIGN U", 0x21, "Hanunoo"),
    c(0x1734, None, "HANUNOO SIGN PAMUDPOD", 0x20, "Hanunoo"),
    c(0x1735, None, "PHILIPPINE SINGLE PUNCTUATION", 0x00, "Hanunoo"),
    c(0x1736, None, "PHILIPPINE DOUBLE PUNCTUATION", 0x00, "Hanunoo"),
    c(0x1740, None, "BUHID LETTER A", 0x31, "Buhid"),
    c(0x1741, None, "BUHID LETTER I", 0x31, "Buhid"),
    c(0x1742, None, "BUHID LETTER U", 0x31, "Buhid"),
    c(0x1743, None, "BUHID LETTER KA", 0x31, "Buhid"),
    c(0x1744, None, "BUHID LETTER GA", 0x31, "Buhid"),
    c(0x1745, None, "BUHID LETTER NGA", 0x31, "Buhid"),
    c(0x1746, None, "BUHID LETTER TA", 0x31, "Buhid"),
    c(0x1747, None, "BUHID LETTER DA", 0x31, "Buhid"),
    c(0x1748, None, "BUHID LETTER NA", 0x31, "Buhid"),
    c(0x1749, None, "BUHID LETTER PA", 0x31, "Buhid"),
    c(0x174A, None, "BUHID LETTER BA", 0x31, "Buhid"),
    c(0x174B, None, "BUHID LETTER MA", 0x31, "Buhid"),
    c(0x174C, None, "BUHID LETTER YA", 0x31, "Buhid"),
    c(0x174D, None, "BUHID LETTER RA", 0x31, "Buhid"),
    c(0x174E, None, "BUHID LETTER LA", 0x31, "Buhid"),
    c(0x174F, None, "BUHID LETTER WA", 0x31, "Buhid"),
    c(0x1750, None, "BUHID LETTER SA", 0x31, "Buhid"),
    c(0x1751, None, "BUHID LETTER HA", 0x31, "Buhid"),
    c(0x1752, None, "BUHID VOWEL SIGN I", 0x21, "Buhid"),
    c(0x1753, None, "BUHID VOWEL SIGN U", 0x21, "Buhid"),
    c(0x1760, None, "TAGBANWA LETTER A", 0x31, "Tagbanwa"),
    c(0x1761, None, "TAGBANWA LETTER I", 0x31, "Tagbanwa"),
    c(0x1762, None, "TAGBANWA LETTER U", 0x31, "Tagbanwa"),
    c(0x1763, None, "TAGBANWA LETTER KA", 0x31, "Tagbanwa"),
    c(0x1764, None, "TAGBANWA LETTER GA", 0x31, "Tagbanwa"),
    c(0x1765, None, "TAGBANWA LETTER NGA", 0x31, "Tagbanwa"),
    c(0x1766, None, "TAGBANWA LETTER TA", 0x31, "Tagbanwa"),
    c(0x1767, None, "TAGBANWA LETTER DA", 0x31, "Tagbanwa"),
    c(0x1768, None, "TAGBANWA LETTER NA", 0x31, "Tagbanwa"),
    c(0x1769, None, "TAGBANWA LETTER PA", 0x31, "Tagbanwa"),
    c(0x176A, None, "TAGBANWA LETTER BA", 0x31, "Tagbanwa"),
    c(0x176B, None, "TAGBANWA LETTER MA", 0x31, "Tagbanwa"),
    c(0x176C, None, "TAGBANWA LETTER YA", 0x31, "Tagbanwa"),
    c(0x176E, None, "TAGBANWA LETTER LA", 0x31, "Tagbanwa"),
    c(0x176F, None, "TAGBANWA LETTER WA", 0x31, "Tagbanwa"),
    c(0x1770, None, "TAGBANWA LETTER SA", 0x31, "Tagbanwa"),
    c(0x1772, None, "TAGBANWA VOWEL SIGN I", 0x21, "Tagbanwa"),
    c(0x1773, None, "TAGBANWA VOWEL SIGN U", 0x21, "Tagbanwa"),
    c(0x1780, None, "KHMER LETTER KA", 0x31, "Khmer"),
    c(0x1781, None, "KHMER LETTER KHA", 0x31, "Khmer"),
    c(0x1782, None, "KHMER LETTER KO", 0x31, "Khmer"),
    c(0x1783, None, "KHMER LETTER KHO", 0x31, "Khmer"),
    c(0x1784, None, "KHMER LETTER NGO", 0x31, "Khmer"),
    c(0x1785, None, "KHMER LETTER CA", 0x31, "Khmer"),
    c(0x1786, None, "KHMER LETTER CHA", 0x31, "Khmer"),
    c(0x1787, None, "KHMER LETTER CO", 0x31, "Khmer"),
    c(0x1788, None, "KHMER LETTER CHO", 0x31, "Khmer"),
    c(0x1789, None, "KHMER LETTER NYO", 0x31, "Khmer"),
    c(0x178A, None, "KHMER LETTER DA", 0x31, "Khmer"),
    c(0x178B, None, "KHMER LETTER TTHA", 0x31, "Khmer"),
    c(0x178C, None, "KHMER LETTER DO", 0x31, "Khmer"),
    c(0x178D, None, "KHMER LETTER TTHO", 0x31, "Khmer"),
    c(0x178E, None, "KHMER LETTER NNO", 0x31, "Khmer"),
    c(0x178F, None, "KHMER LETTER TA", 0x31, "Khmer"),
    c(0x1790, None, "KHMER LETTER THA", 0x31, "Khmer"),
    c(0x1791, None, "KHMER LETTER TO", 0x31, "Khmer"),
    c(0x1792, None, "KHMER LETTER THO", 0x31, "Khmer"),
    c(0x1793, None, "KHMER LETTER NO", 0x31, "Khmer"),
    c(0x1794, None, "KHMER LETTER BA", 0x31, "Khmer"),
    c(0x1795, None, "KHMER LETTER PHA", 0x31, "Khmer"),
    c(0x1796, None, "KHMER LETTER PO", 0x31, "Khmer"),
    c(0x1797, None, "KHMER LETTER PHO", 0x31, "Khmer"),
    c(0x1798, None, "KHMER LETTER MO", 0x31, "Khmer"),
    c(0x1799, None, "KHMER LETTER YO", 0x31, "Khmer"),
    c(0x179A, None, "KHMER LETTER RO", 0x31, "Khmer"),
    c(0x179B, None, "KHMER LETTER LO", 0x31, "Khmer"),
    c(0x179C, None, "KHMER LETTER VO", 0x31, "Khmer"),
    c(0x179D, None, "KHMER LETTER SHA", 0x31, "Khmer"),
    c(0x179E, None, "KHMER LETTER SSO", 0x31, "Khmer"),
    c(0x179F, None, "KHMER LETTER SA", 0x31, "Khmer"),
    c(0x17A0, None, "KHMER LETTER HA", 0x31, "Khmer"),
    c(0x17A1, None, "KHMER LETTER LA", 0x31, "Khmer"),
    c(0x17A2, None, "KHMER LETTER QA", 0x31, "Khmer"),
    c(0x17A3, None, "KHMER INDEPENDENT VOWEL QAQ", 0x39, "Khmer"),
    c(0x17A4, None, "KHMER INDEPENDENT VOWEL QAA", 0x39, "Khmer"),
    c(0x17A5, None, "KHMER INDEPENDENT VOWEL QI", 0x31, "Khmer"),
    c(0x17A6, None, "KHMER INDEPENDENT VOWEL QII", 0x31, "Khmer"),
    c(0x17A7, None, "KHMER INDEPENDENT VOWEL QU", 0x31, "Khmer"),
    c(0x17A8, None, "KHMER INDEPENDENT VOWEL QUK", 0x31, "Khmer"),
    c(0x17A9, None, "KHMER INDEPENDENT VOWEL QUU", 0x31, "Khmer"),
    c(0x17AA, None, "KHMER INDEPENDENT VOWEL QUUV", 0x31, "Khmer"),
    c(0x17AB, None, "KHMER INDEPENDENT VOWEL RY", 0x31, "Khmer"),
    c(0x17AC, None, "KHMER INDEPENDENT VOWEL RYY", 0x31, "Khmer"),
    c(0x17AD, None, "KHMER INDEPENDENT VOWEL LY", 0x31, "Khmer"),
    c(0x17AE, None, "KHMER INDEPENDENT VOWEL LYY", 0x31, "Khmer"),
    c(0x17AF, None, "KHMER INDEPENDENT VOWEL QE", 0x31, "Khmer"),
    c(0x17B0, None, "KHMER INDEPENDENT VOWEL QAI", 0x31, "Khmer"),
    c(0x17B1, None, "KHMER INDEPENDENT VOWEL QOO TYPE ONE", 0x31, "Khmer"),
    c(0x17B2, None, "KHMER INDEPENDENT VOWEL QOO TYPE TWO", 0x31, "Khmer"),
    c(0x17B3, None, "KHMER INDEPENDENT VOWEL QAU", 0x31, "Khmer"),
    c(0x17B4, None, "KHMER VOWEL INHERENT AQ", 0x20, "Khmer"),
    c(0x17B5, None, "KHMER VOWEL INHERENT AA", 0x20, "Khmer"),
    c(0x17B6, None, "KHMER VOWEL SIGN AA", 0x21, "Khmer"),
    c(0x17B7, None, "KHMER VOWEL SIGN I", 0x21, "Khmer"),
    c(0x17B8, None, "KHMER VOWEL SIGN II", 0x21, "Khmer"),
    c(0x17B9, None, "KHMER VOWEL SIGN Y", 0x21, "Khmer"),
    c(0x17BA, None, "KHMER VOWEL SIGN YY", 0x21, "Khmer"),
    c(0x17BB, None, "KHMER VOWEL SIGN U", 0x21, "Khmer"),
    c(0x17BC, None, "KHMER VOWEL SIGN UU", 0x21, "Khmer"),
    c(0x17BD, None, "KHMER VOWEL SIGN UA", 0x21, "Khmer"),
    c(0x17BE, None, "KHMER VOWEL SIGN OE", 0x21, "Khmer"),
    c(0x17BF, None, "KHMER VOWEL SIGN YA", 0x21, "Khmer"),
    c(0x17C0, None, "KHMER VOWEL SIGN IE", 0x21, "Khmer"),
    c(0x17C1, None, "KHMER VOWEL SIGN E", 0x21, "Khmer"),
    c(0x17C2, None, "KHMER VOWEL SIGN AE", 0x21, "Khmer"),
    c(0x17C3, None, "KHMER VOWEL SIGN AI", 0x21, "Khmer"),
    c(0x17C4, None, "KHMER VOWEL SIGN OO", 0x21, "Khmer"),
    c(0x17C5, None, "KHMER VOWEL SIGN AU", 0x21, "Khmer"),
    c(0x17C6, None, "KHMER SIGN NIKAHIT", 0x21, "Khmer"),
    c(0x17C7, None, "KHMER SIGN REAHMUK", 0x21, "Khmer"),
    c(0x17C8, None, "KHMER SIGN YUUKALEAPINTU", 0x21, "Khmer"),
    c(0x17C9, None, "KHMER SIGN MUUSIKATOAN", 0x20, "Khmer"),
    c(0x17CA, None, "KHMER SIGN TRIISAP", 0x20, "Khmer"),
    c(0x17CB, None, "KHMER SIGN BANTOC", 0x20, "Khmer"),
    c(0x17CC, None, "KHMER SIGN ROBAT", 0x20, "Khmer"),
    c(0x17CD, None, "KHMER SIGN TOANDAKHIAT", 0x20, "Khmer"),
    c(0x17CE, None, "KHMER SIGN KAKABAT", 0x20, "Khmer"),
    c(0x17CF, None, "KHMER SIGN AHSDA", 0x20, "Khmer"),
    c(0x17D0, None, "KHMER SIGN SAMYOK SANNYA", 0x20, "Khmer"),
    c(0x17D1, None, "KHMER SIGN VIRIAM", 0x20, "Khmer"),
    c(0x17D2, None, "KHMER SIGN COENG", 0x20, "Khmer"),
    c(0x17D3, None, "KHMER SIGN BATHAMASAT", 0x20, "Khmer"),
    c(0x17D4, None, "KHMER SIGN KHAN", 0x00, "Khmer"),
    c(0x17D5, None, "KHMER SIGN BARIYOOSAN", 0x00, "Khmer"),
    c(0x17D6, None, "KHMER SIGN CAMNUC PII KUUH", 0x00, "Khmer"),
    c(0x17D7, None, "KHMER SIGN LEK TOO", 0x31, "Khmer"),
    c(0x17D8, None, "KHMER SIGN BEYYAL", 0x00, "Khmer"),
    c(0x17D9, None, "KHMER SIGN PHNAEK MUAN", 0x00, "Khmer"),
    c(0x17DA, None, "KHMER SIGN KOOMUUT", 0x00, "Khmer"),
    c(0x17DB, None, "KHMER CURRENCY SYMBOL RIEL", 0x00, "Khmer"),
    c(0x17DC, None, "KHMER SIGN AVAKRAHASANYA", 0x31, "Khmer"),
    c(0x17DD, None, "KHMER SIGN ATTHACAN", 0x20, "Khmer"),
    c(0x17E0, None, "KHMER DIGIT ZERO", 0x20, "Khmer"),
    c(0x17E1, None, "KHMER DIGIT ONE", 0x20, "Khmer"),
    c(0x17E2, None, "KHMER DIGIT TWO", 0x20, "Khmer"),
    c(0x17E3, None, "KHMER DIGIT THREE", 0x20, "Khmer"),
    c(0x17E4, None, "KHMER DIGIT FOUR", 0x20, "Khmer"),
    c(0x17E5, None, "KHMER DIGIT FIVE", 0x20, "Khmer"),
    c(0x17E6, None, "KHMER DIGIT SIX", 0x20, "Khmer"),
    c(0x17E7, None, "KHMER DIGIT SEVEN", 0x20, "Khmer"),
    c(0x17E8, None, "KHMER DIGIT EIGHT", 0x20, "Khmer"),
    c(0x17E9, None, "KHMER DIGIT NINE", 0x20, "Khmer"),
    c(0x17F0, None, "KHMER SYMBOL LEK ATTAK SON", 0x00, "Khmer"),
    c(0x17F1, None, "KHMER SYMBOL LEK ATTAK MUOY", 0x00, "Khmer"),
    c(0x17F2, None, "KHMER SYMBOL LEK ATTAK PII", 0x00, "Khmer"),
    c(0x17F3, None, "KHMER SYMBOL LEK ATTAK BEI", 0x00, "Khmer"),
    c(0x17F4, None, "KHMER SYMBOL LEK ATTAK BUON", 0x00, "Khmer"),
    c(0x17F5, None, "KHMER SYMBOL LEK ATTAK PRAM", 0x00, "Khmer"),
    c(0x17F6, None, "KHMER SYMBOL LEK ATTAK PRAM-MUOY", 0x00, "Khmer"),
    c(0x17F7, None, "KHMER SYMBOL LEK ATTAK PRAM-PII", 0x00, "Khmer"),
    c(0x17F8, None, "KHMER SYMBOL LEK ATTAK PRAM-BEI", 0x00, "Khmer"),
    c(0x17F9, None, "KHMER SYMBOL LEK ATTAK PRAM-BUON", 0x00, "Khmer"),
    c(0x1800, None, "MONGOLIAN BIRGA", 0x00, "Mongolian"),
    c(0x1801, None, "MONGOLIAN ELLIPSIS", 0x00, "Mongolian"),
    c(0x1802, None, "MONGOLIAN COMMA", 0x00, "Mongolian"),
    c(0x1803, None, "MONGOLIAN FULL STOP", 0x00, "Mongolian"),
    c(0x1804, None, "MONGOLIAN COLON", 0x00, "Mongolian"),
    c(0x1805, None, "MONGOLIAN FOUR DOTS", 0x00, "Mongolian"),
    c(0x1806, None, "MONGOLIAN TODO SOFT HYPHEN", 0x00, "Mongolian"),
    c(0x1807, None, "MONGOLIAN SIBE SYLLABLE BOUNDARY MARKER", 0x00, "Mongolian"),
    c(0x1808, None, "MONGOLIAN MANCHU COMMA", 0x00, "Mongolian"),
    c(0x1809, None, "MONGOLIAN MANCHU FULL STOP", 0x00, "Mongolian"),
    c(0x180A, None, "MONGOLIAN NIRUGU", 0x00, "Mongolian"),
    c(0x180B, None, "MONGOLIAN FREE VARIATION SELECTOR ONE", 0x20, "Mongolian"),
    c(0x180C, None, "MONGOLIAN FREE VARIATION SELECTOR TWO", 0x20, "Mongolian"),
    c(0x180D, None, "MONGOLIAN FREE VARIATION SELECTOR THREE", 0x20, "Mongolian"),
    c(0x180E, None, "MONGOLIAN VOWEL SEPARATOR", 0x00, "Mongolian"),
    c(0x180F, None, "MONGOLIAN FREE VARIATION SELECTOR FOUR", 0x20, "Mongolian"),
    c(0x1810, None, "MONGOLIAN DIGIT ZERO", 0x20, "Mongolian"),
    c(0x1811, None, "MONGOLIAN DIGIT ONE", 0x20, "Mongolian"),
    c(0x1812, None, "MONGOLIAN DIGIT TWO", 0x20, "Mongolian"),
    c(0x1813, None, "MONGOLIAN DIGIT THREE", 0x20, "Mongolian"),
    c(0x1814, None, "MONGOLIAN DIGIT FOUR", 0x20, "Mongolian"),
    c(0x1815, None, "MONGOLIAN DIGIT FIVE", 0x20, "Mongolian"),
    c(0x1816, None, "MONGOLIAN DIGIT SIX", 0x20, "Mongolian"),
    c(0x1817, None, "MONGOLIAN DIGIT SEVEN", 0x20, "Mongolian"),
    c(0x1818, None, "MONGOLIAN DIGIT EIGHT", 0x20, "Mongolian"),
    c(0x1819, None, "MONGOLIAN DIGIT NINE", 0x20, "Mongolian"),
    c(0x1820, None, "MONGOLIAN LETTER A", 0x31, "Mongolian"),
    c(0x1821, None, "MONGOLIAN LETTER E", 0x31, "Mongolian"),
    c(0x1822, None, "MONGOLIAN LETTER I", 0x31, "Mongolian"),
    c(0x1823, None, "MONGOLIAN LETTER O", 0x31, "Mongolian"),
    c(0x1824, None, "MONGOLIAN LETTER U", 0x31, "Mongolian"),
    c(0x1825, None, "MONGOLIAN LETTER OE", 0x31, "Mongolian"),
    c(0x1826, None, "MONGOLIAN LETTER UE", 0x31, "Mongolian"),
    c(0x1827, None, "MONGOLIAN LETTER EE", 0x31, "Mongolian"),
    c(0x1828, None, "MONGOLIAN LETTER NA", 0x31, "Mongolian"),
    c(0x1829, None, "MONGOLIAN LETTER ANG", 0x31, "Mongolian"),
    c(0x182A, None, "MONGOLIAN LETTER BA", 0x31, "Mongolian"),
    c(0x182B, None, "MONGOLIAN LETTER PA", 0x31, "Mongolian"),
    c(0x182C, None, "MONGOLIAN LETTER QA", 0x31, "Mongolian"),
    c(0x182D, None, "MONGOLIAN LETTER GA", 0x31, "Mongolian"),
    c(0x182E, None, "MONGOLIAN LETTER MA", 0x31, "Mongolian"),
    c(0x182F, None, "MONGOLIAN LETTER LA", 0x31, "Mongolian"),
    c(0x1830, None, "MONGOLIAN LETTER SA", 0x31, "Mongolian"),
    c(0x1831, None, "MONGOLIAN LETTER SHA", 0x31, "Mongolian"),
    c(0x1832, None, "MONGOLIAN LETTER TA", 0x31, "Mongolian"),
    c(0x1833, None, "MONGOLIAN LETTER DA", 0x31, "Mongolian"),
    c(0x1834, None, "MONGOLIAN LETTER CHA", 0x31, "Mongolian"),
    c(0x1835, None, "MONGOLIAN LETTER JA", 0x31, "Mongolian"),
    c(0x1836, None, "MONGOLIAN LETTER YA", 0x31, "Mongolian"),
    c(0x1837, None, "MONGOLIAN LETTER RA", 0x31, "Mongolian"),
    c(0x1838, None, "MONGOLIAN LETTER WA", 0x31, "Mongolian"),
    c(0x1839, None, "MONGOLIAN LETTER FA", 0x31, "Mongolian"),
    c(0x183A, None, "MONGOLIAN LETTER KA", 0x31, "Mongolian"),
    c(0x183B, None, "MONGOLIAN LETTER KHA", 0x31, "Mongolian"),
    c(0x183C, None, "MONGOLIAN LETTER TSA", 0x31, "Mongolian"),
    c(0x183D, None, "MONGOLIAN LETTER ZA", 0x31, "Mongolian"),
    c(0x183E, None, "MONGOLIAN LETTER HAA", 0x31, "Mongolian"),
    c(0x183F, None, "MONGOLIAN LETTER ZRA", 0x31, "Mongolian"),
    c(0x1840, None, "MONGOLIAN LETTER LHA", 0x31, "Mongolian"),
    c(0x1841, None, "MONGOLIAN LETTER ZHI", 0x31, "Mongolian"),
    c(0x1842, None, "MONGOLIAN LETTER CHI", 0x31, "Mongolian"),
    c(0x1843, None, "MONGOLIAN LETTER TODO LONG VOWEL SIGN", 0x31, "Mongolian"),
    c(0x1844, None, "MONGOLIAN LETTER TODO E", 0x31, "Mongolian"),
    c(0x1845, None, "MONGOLIAN LETTER TODO I", 0x31, "Mongolian"),
    c(0x1846, None, "MONGOLIAN LETTER TODO O", 0x31, "Mongolian"),
    c(0x1847, None, "MONGOLIAN LETTER TODO U", 0x31, "Mongolian"),
    c(0x1848, None, "MONGOLIAN LETTER TODO OE", 0x31, "Mongolian"),
    c(0x1849, None, "MONGOLIAN LETTER TODO UE", 0x31, "Mongolian"),
    c(0x184A, None, "MONGOLIAN LETTER TODO ANG", 0x31, "Mongolian"),
    c(0x184B, None, "MONGOLIAN LETTER TODO BA", 0x31, "Mongolian"),
    c(0x184C, None, "MONGOLIAN LETTER TODO PA", 0x31, "Mongolian"),
    c(0x184D, None, "MONGOLIAN LETTER TODO QA", 0x31, "Mongolian"),
    c(0x184E, None, "MONGOLIAN LETTER TODO GA", 0x31, "Mongolian"),
    c(0x184F, None, "MONGOLIAN LETTER TODO MA", 0x31, "Mongolian"),
    c(0x1850, None, "MONGOLIAN LETTER TODO TA", 0x31, "Mongolian"),
    c(0x1851, None, "MONGOLIAN LETTER TODO DA", 0x31, "Mongolian"),
    c(0x1852, None, "MONGOLIAN LETTER TODO CHA", 0x31, "Mongolian"),
    c(0x1853, None, "MONGOLIAN LETTER TODO JA", 0x31, "Mongolian"),
    c(0x1854, None, "MONGOLIAN LETTER TODO TSA", 0x31, "Mongolian"),
    c(0x1855, None, "MONGOLIAN LETTER TODO YA", 0x31, "Mongolian"),
    c(0x1856, None, "MONGOLIAN LETTER TODO WA", 0x31, "Mongolian"),
    c(0x1857, None, "MONGOLIAN LETTER TODO KA", 0x31, "Mongolian"),
    c(0x1858, None, "MONGOLIAN LETTER TODO GAA", 0x31, "Mongolian"),
    c(0x1859, None, "MONGOLIAN LETTER TODO HAA", 0x31, "Mongolian"),
    c(0x185A, None, "MONGOLIAN LETTER TODO JIA", 0x31, "Mongolian"),
    c(0x185B, None, "MONGOLIAN LETTER TODO NIA", 0x31, "Mongolian"),
    c(0x185C, None, "MONGOLIAN LETTER TODO DZA", 0x31, "Mongolian"),
    c(0x185D, None, "MONGOLIAN LETTER SIBE E", 0x31, "Mongolian"),
    c(0x185E, None, "MONGOLIAN LETTER SIBE I", 0x31, "Mongolian"),
    c(0x185F, None, "MONGOLIAN LETTER SIBE IY", 0x31, "Mongolian"),
    c(0x1860, None, "MONGOLIAN LETTER SIBE UE", 0x31, "Mongolian"),
    c(0x1861, None, "MONGOLIAN LETTER SIBE U", 0x31, "Mongolian"),
    c(0x1862, None, "MONGOLIAN LETTER SIBE ANG", 0x31, "Mongolian"),
    c(0x1863, None, "MONGOLIAN LETTER SIBE KA", 0x31, "Mongolian"),
    c(0x1864, None, "MONGOLIAN LETTER SIBE GA", 0x31, "Mongolian"),
    c(0x1865, None, "MONGOLIAN LETTER SIBE HA", 0x31, "Mongolian"),
    c(0x1866, None, "MONGOLIAN LETTER SIBE PA", 0x31, "Mongolian"),
    c(0x1867, None, "MONGOLIAN LETTER SIBE SHA", 0x31, "Mongolian"),
    c(0x1868, None, "MONGOLIAN LETTER SIBE TA", 0x31, "Mongolian"),
    c(0x1869, None, "MONGOLIAN LETTER SIBE DA", 0x31, "Mongolian"),
    c(0x186A, None, "MONGOLIAN LETTER SIBE JA", 0x31, "Mongolian"),
    c(0x186B, None, "MONGOLIAN LETTER SIBE FA", 0x31, "Mongolian"),
    c(0x186C, None, "MONGOLIAN LETTER SIBE GAA", 0x31, "Mongolian"),
    c(0x186D, None, "MONGOLIAN LETTER SIBE HAA", 0x31, "Mongolian"),
    c(0x186E, None, "MONGOLIAN LETTER SIBE TSA", 0x31, "Mongolian"),
    c(0x186F, None, "MONGOLIAN LETTER SIBE ZA", 0x31, "Mongolian"),
    c(0x1870, None, "MONGOLIAN LETTER SIBE RAA", 0x31, "Mongolian"),
    c(0x1871, None, "MONGOLIAN LETTER SIBE CHA", 0x31, "Mongolian"),
    c(0x1872, None, "MONGOLIAN LETTER SIBE ZHA", 0x31, "Mongolian"),
    c(0x1873, None, "MONGOLIAN LETTER MANCHU I", 0x31, "Mongolian"),
    c(0x1874, None, "MONGOLIAN LETTER MANCHU KA", 0x31, "Mongolian"),
    c(0x1875, None, "MONGOLIAN LETTER MANCHU RA", 0x31, "Mongolian"),
    c(0x1876, None, "MONGOLIAN LETTER MANCHU FA", 0x31, "Mongolian"),
    c(0x1877, None, "MONGOLIAN LETTER MANCHU ZHA", 0x31, "Mongolian"),
    c(0x1878, None, "MONGOLIAN LETTER CHA WITH TWO DOTS", 0x31, "Mongolian"),
    c(0x1880, None, "MONGOLIAN LETTER ALI GALI ANUSVARA ONE", 0x31, "Mongolian"),
    c(0x1881, None, "MONGOLIAN LETTER ALI GALI VISARGA ONE", 0x31, "Mongolian"),
    c(0x1882, None, "MONGOLIAN LETTER ALI GALI DAMARU", 0x31, "Mongolian"),
    c(0x1883, None, "MONGOLIAN LETTER ALI GALI UBADAMA", 0x31, "Mongolian"),
    c(0x1884, None, "MONGOLIAN LETTER ALI GALI INVERTED UBADAMA", 0x31, "Mongolian"),
    c(0x1885, None, "MONGOLIAN LETTER ALI GALI BALUDA", 0x31, "Mongolian"),
    c(0x1886, None, "MONGOLIAN LETTER ALI GALI THREE BALUDA", 0x31, "Mongolian"),
    c(0x1887, None, "MONGOLIAN LETTER ALI GALI A", 0x31, "Mongolian"),
    c(0x1888, None, "MONGOLIAN LETTER ALI GALI I", 0x31, "Mongolian"),
    c(0x1889, None, "MONGOLIAN LETTER ALI GALI KA", 0x31, "Mongolian"),
    c(0x188A, None, "MONGOLIAN LETTER ALI GALI NGA", 0x31, "Mongolian"),
    c(0x188B, None, "MONGOLIAN LETTER ALI GALI CA", 0x31, "Mongolian"),
    c(0x188C, None, "MONGOLIAN LETTER ALI GALI TTA", 0x31, "Mongolian"),
    c(0x188D, None, "MONGOLIAN LETTER ALI GALI TTHA", 0x31, "Mongolian"),
    c(0x188E, None, "MONGOLIAN LETTER ALI GALI DDA", 0x31, "Mongolian"),
    c(0x188F, None, "MONGOLIAN LETTER ALI GALI NNA", 0x31, "Mongolian"),
    c(0x1890, None, "MONGOLIAN LETTER ALI GALI TA", 0x31, "Mongolian"),
    c(0x1891, None, "MONGOLIAN LETTER ALI GALI DA", 0x31, "Mongolian"),
    c(0x1892, None, "MONGOLIAN LETTER ALI GALI PA", 0x31, "Mongolian"),
    c(0x1893, None, "MONGOLIAN LETTER ALI GALI PHA", 0x31, "Mongolian"),
    c(0x1894, None, "MONGOLIAN LETTER ALI GALI SSA", 0x31, "Mongolian"),
    c(0x1895, None, "MONGOLIAN LETTER ALI GALI ZHA", 0x31, "Mongolian"),
    c(0x1896, None, "MONGOLIAN LETTER ALI GALI ZA", 0x31, "Mongolian"),
    c(0x1897, None, "MONGOLIAN LETTER ALI GALI AH", 0x31, "Mongolian"),
    c(0x1898, None, "MONGOLIAN LETTER TODO ALI GALI TA", 0x31, "Mongolian"),
    c(0x1899, None, "MONGOLIAN LETTER TODO ALI GALI ZHA", 0x31, "Mongolian"),
    c(0x189A, None, "MONGOLIAN LETTER MANCHU ALI GALI GHA", 0x31, "Mongolian"),
    c(0x189B, None, "MONGOLIAN LETTER MANCHU ALI GALI NGA", 0x31, "Mongolian"),
    c(0x189C, None, "MONGOLIAN LETTER MANCHU ALI GALI CA", 0x31, "Mongolian"),
    c(0x189D, None, "MONGOLIAN LETTER MANCHU ALI GALI JHA", 0x31, "Mongolian"),
    c(0x189E, None, "MONGOLIAN LETTER MANCHU ALI GALI TTA", 0x31, "Mongolian"),
    c(0x189F, None, "MONGOLIAN LETTER MANCHU ALI GALI DDHA", 0x31, "Mongolian"),
    c(0x18A0, None, "MONGOLIAN LETTER MANCHU ALI GALI TA", 0x31, "Mongolian"),
    c(0x18A1, None, "MONGOLIAN LETTER MANCHU ALI GALI DHA", 0x31, "Mongolian"),
    c(0x18A2, None, "MONGOLIAN LETTER MANCHU ALI GALI SSA", 0x31, "Mongolian"),
    c(0x18A3, None, "MONGOLIAN LETTER MANCHU ALI GALI CYA", 0x31, "Mongolian"),
    c(0x18A4, None, "MONGOLIAN LETTER MANCHU ALI GALI ZHA", 0x31, "Mongolian"),
    c(0x18A5, None, "MONGOLIAN LETTER MANCHU ALI GALI ZA", 0x31, "Mongolian"),
    c(0x18A6, None, "MONGOLIAN LETTER ALI GALI HALF U", 0x31, "Mongolian"),
    c(0x18A7, None, "MONGOLIAN LETTER ALI GALI HALF YA", 0x31, "Mongolian"),
    c(0x18A8, None, "MONGOLIAN LETTER MANCHU ALI GALI BHA", 0x31, "Mongolian"),
    c(0x18A9, None, "MONGOLIAN LETTER ALI GALI DAGALGA", 0x21, "Mongolian"),
    c(0x18AA, None, "MONGOLIAN LETTER MANCHU ALI GALI LHA", 0x31, "Mongolian"),
    c(0x18B0, None, "CANADIAN SYLLABICS OY", 0x31, "UCAS_Ext"),
    c(0x18B1, None, "CANADIAN SYLLABICS AY", 0x31, "UCAS_Ext"),
    c(0x18B2, None, "CANADIAN SYLLABICS AAY", 0x31, "UCAS_Ext"),
    c(0x18B3, None, "CANADIAN SYLLABICS WAY", 0x31, "UCAS_Ext"),
    c(0x18B4, None, "CANADIAN SYLLABICS POY", 0x31, "UCAS_Ext"),
    c(0x18B5, None, "CANADIAN SYLLABICS PAY", 0x31, "UCAS_Ext"),
    c(0x18B6, None, "CANADIAN SYLLABICS PWOY", 0x31, "UCAS_Ext"),
    c(0x18B7, None, "CANADIAN SYLLABICS TAY", 0x31, "UCAS_Ext"),
    c(0x18B8, None, "CANADIAN SYLLABICS KAY", 0x31, "UCAS_Ext"),
    c(0x18B9, None, "CANADIAN SYLLABICS KWAY", 0x31, "UCAS_Ext"),
    c(0x18BA, None, "CANADIAN SYLLABICS MAY", 0x31, "UCAS_Ext"),
    c(0x18BB, None, "CANADIAN SYLLABICS NOY", 0x31, "UCAS_Ext"),
    c(0x18BC, None, "CANADIAN SYLLABICS NAY", 0x31, "UCAS_Ext"),
    c(0x18BD, None, "CANADIAN SYLLABICS LAY", 0x31, "UCAS_Ext"),
    c(0x18BE, None, "CANADIAN SYLLABICS SOY", 0x31, "UCAS_Ext"),
    c(0x18BF, None, "CANADIAN SYLLABICS SAY", 0x31, "UCAS_Ext"),
    c(0x18C0, None, "CANADIAN SYLLABICS SHOY", 0x31, "UCAS_Ext"),
    c(0x18C1, None, "CANADIAN SYLLABICS SHAY", 0x31, "UCAS_Ext"),
    c(0x18C2, None, "CANADIAN SYLLABICS SHWOY", 0x31, "UCAS_Ext"),
    c(0x18C3, None, "CANADIAN SYLLABICS YOY", 0x31, "UCAS_Ext"),
    c(0x18C4, None, "CANADIAN SYLLABICS YAY", 0x31, "UCAS_Ext"),
    c(0x18C5, None, "CANADIAN SYLLABICS RAY", 0x31, "UCAS_Ext"),
    c(0x18C6, None, "CANADIAN SYLLABICS NWI", 0x31, "UCAS_Ext"),
    c(0x18C7, None, "CANADIAN SYLLABICS OJIBWAY NWI", 0x31, "UCAS_Ext"),
    c(0x18C8, None, "CANADIAN SYLLABICS NWII", 0x31, "UCAS_Ext"),
    c(0x18C9, None, "CANADIAN SYLLABICS OJIBWAY NWII", 0x31, "UCAS_Ext"),
    c(0x18CA, None, "CANADIAN SYLLABICS NWO", 0x31, "UCAS_Ext"),
    c(0x18CB, None, "CANADIAN SYLLABICS OJIBWAY NWO", 0x31, "UCAS_Ext"),
    c(0x18CC, None, "CANADIAN SYLLABICS NWOO", 0x31, "UCAS_Ext"),
    c(0x18CD, None, "CANADIAN SYLLABICS OJIBWAY NWOO", 0x31, "UCAS_Ext"),
    c(0x18CE, None, "CANADIAN SYLLABICS RWEE", 0x31, "UCAS_Ext"),
    c(0x18CF, None, "CANADIAN SYLLABICS RWI", 0x31, "UCAS_Ext"),
    c(0x18D0, None, "CANADIAN SYLLABICS RWII", 0x31, "UCAS_Ext"),
    c(0x18D1, None, "CANADIAN SYLLABICS RWO", 0x31, "UCAS_Ext"),
    c(0x18D2, None, "CANADIAN SYLLABICS RWOO", 0x31, "UCAS_Ext"),
    c(0x18D3, None, "CANADIAN SYLLABICS RWA", 0x31, "UCAS_Ext"),
    c(0x18D4, None, "CANADIAN SYLLABICS OJIBWAY P", 0x31, "UCAS_Ext"),
    c(0x18D5, None, "CANADIAN SYLLABICS OJIBWAY T", 0x31, "UCAS_Ext"),
    c(0x18D6, None, "CANADIAN SYLLABICS OJIBWAY K", 0x31, "UCAS_Ext"),
    c(0x18D7, None, "CANADIAN SYLLABICS OJIBWAY C", 0x31, "UCAS_Ext"),
    c(0x18D8, None, "CANADIAN SYLLABICS OJIBWAY M", 0x31, "UCAS_Ext"),
    c(0x18D9, None, "CANADIAN SYLLABICS OJIBWAY N", 0x31, "UCAS_Ext"),
    c(0x18DA, None, "CANADIAN SYLLABICS OJIBWAY S", 0x31, "UCAS_Ext"),
    c(0x18DB, None, "CANADIAN SYLLABICS OJIBWAY SH", 0x31, "UCAS_Ext"),
    c(0x18DC, None, "CANADIAN SYLLABICS EASTERN W", 0x31, "UCAS_Ext"),
    c(0x18DD, None, "CANADIAN SYLLABICS WESTERN W", 0x31, "UCAS_Ext"),
    c(0x18DE, None, "CANADIAN SYLLABICS FINAL SMALL RING", 0x31, "UCAS_Ext"),
    c(0x18DF, None, "CANADIAN SYLLABICS FINAL RAISED DOT", 0x31, "UCAS_Ext"),
    c(0x18E0, None, "CANADIAN SYLLABICS R-CREE RWE", 0x31, "UCAS_Ext"),
    c(0x18E1, None, "CANADIAN SYLLABICS WEST-CREE LOO", 0x31, "UCAS_Ext"),
    c(0x18E2, None, "CANADIAN SYLLABICS WEST-CREE LAA", 0x31, "UCAS_Ext"),
    c(0x18E3, None, "CANADIAN SYLLABICS THWE", 0x31, "UCAS_Ext"),
    c(0x18E4, None, "CANADIAN SYLLABICS THWA", 0x31, "UCAS_Ext"),
    c(0x18E5, None, "CANADIAN SYLLABICS TTHWE", 0x31, "UCAS_Ext"),
    c(0x18E6, None, "CANADIAN SYLLABICS TTHOO", 0x31, "UCAS_Ext"),
    c(0x18E7, None, "CANADIAN SYLLABICS TTHAA", 0x31, "UCAS_Ext"),
    c(0x18E8, None, "CANADIAN SYLLABICS TLHWE", 0x31, "UCAS_Ext"),
    c(0x18E9, None, "CANADIAN SYLLABICS TLHOO", 0x31, "UCAS_Ext"),
    c(0x18EA, None, "CANADIAN SYLLABICS SAYISI SHWE", 0x31, "UCAS_Ext"),
    c(0x18EB, None, "CANADIAN SYLLABICS SAYISI SHOO", 0x31, "UCAS_Ext"),
    c(0x18EC, None, "CANADIAN SYLLABICS SAYISI HOO", 0x31, "UCAS_Ext"),
    c(0x18ED, None, "CANADIAN SYLLABICS CARRIER GWU", 0x31, "UCAS_Ext"),
    c(0x18EE, None, "CANADIAN SYLLABICS CARRIER DENE GEE", 0x31, "UCAS_Ext"),
    c(0x18EF, None, "CANADIAN SYLLABICS CARRIER GAA", 0x31, "UCAS_Ext"),
    c(0x18F0, None, "CANADIAN SYLLABICS CARRIER GWA", 0x31, "UCAS_Ext"),
    c(0x18F1, None, "CANADIAN SYLLABICS SAYISI JUU", 0x31, "UCAS_Ext"),
    c(0x18F2, None, "CANADIAN SYLLABICS CARRIER JWA", 0x31, "UCAS_Ext"),
    c(0x18F3, None, "CANADIAN SYLLABICS BEAVER DENE L", 0x31, "UCAS_Ext"),
    c(0x18F4, None, "CANADIAN SYLLABICS BEAVER DENE R", 0x31, "UCAS_Ext"),
    c(0x18F5, None, "CANADIAN SYLLABICS CARRIER DENTAL S", 0x31, "UCAS_Ext"),
    c(0x1900, None, "LIMBU VOWEL-CARRIER LETTER", 0x31, "Limbu"),
    c(0x1901, None, "LIMBU LETTER KA", 0x31, "Limbu"),
    c(0x1902, None, "LIMBU LETTER KHA", 0x31, "Limbu"),
    c(0x1903, None, "LIMBU LETTER GA", 0x31, "Limbu"),
    c(0x1904, None, "LIMBU LETTER GHA", 0x31, "Limbu"),
    c(0x1905, None, "LIMBU LETTER NGA", 0x31, "Limbu"),
    c(0x1906, None, "LIMBU LETTER CA", 0x31, "Limbu"),
    c(0x1907, None, "LIMBU LETTER CHA", 0x31, "Limbu"),
    c(0x1908, None, "LIMBU LETTER JA", 0x31, "Limbu"),
    c(0x1909, None, "LIMBU LETTER JHA", 0x31, "Limbu"),
    c(0x190A, None, "LIMBU LETTER YAN", 0x31, "Limbu"),
    c(0x190B, None, "LIMBU LETTER TA", 0x31, "Limbu"),
    c(0x190C, None, "LIMBU LETTER THA", 0x31, "Limbu"),
    c(0x190D, None, "LIMBU LETTER DA", 0x31, "Limbu"),
    c(0x190E, None, "LIMBU LETTER DHA", 0x31, "Limbu"),
    c(0x190F, None, "LIMBU LETTER NA", 0x31, "Limbu"),
    c(0x1910, None, "LIMBU LETTER PA", 0x31, "Limbu"),
    c(0x1911, None, "LIMBU LETTER PHA", 0x31, "Limbu"),
    c(0x1912, None, "LIMBU LETTER BA", 0x31, "Limbu"),
    c(0x1913, None, "LIMBU LETTER BHA", 0x31, "Limbu"),
    c(0x1914, None, "LIMBU LETTER MA", 0x31, "Limbu"),
    c(0x1915, None, "LIMBU LETTER YA", 0x31, "Limbu"),
    c(0x1916, None, "LIMBU LETTER RA", 0x31, "Limbu"),
    c(0x1917, None, "LIMBU LETTER LA", 0x31, "Limbu"),
    c(0x1918, None, "LIMBU LETTER WA", 0x31, "Limbu"),
    c(0x1919, None, "LIMBU LETTER SHA", 0x31, "Limbu"),
    c(0x191A, None, "LIMBU LETTER SSA", 0x31, "Limbu"),
    c(0x191B, None, "LIMBU LETTER SA", 0x31, "Limbu"),
    c(0x191C, None, "LIMBU LETTER HA", 0x31, "Limbu"),
    c(0x191D, None, "LIMBU LETTER GYAN", 0x31, "Limbu"),
    c(0x191E, None, "LIMBU LETTER TRA", 0x31, "Limbu"),
    c(0x1920, None, "LIMBU VOWEL SIGN A", 0x21, "Limbu"),
    c(0x1921, None, "LIMBU VOWEL SIGN I", 0x21, "Limbu"),
    c(0x1922, None, "LIMBU VOWEL SIGN U", 0x21, "Limbu"),
    c(0x1923, None, "LIMBU VOWEL SIGN EE", 0x21, "Limbu"),
    c(0x1924, None, "LIMBU VOWEL SIGN AI", 0x21, "Limbu"),
    c(0x1925, None, "LIMBU VOWEL SIGN OO", 0x21, "Limbu"),
    c(0x1926, None, "LIMBU VOWEL SIGN AU", 0x21, "Limbu"),
    c(0x1927, None, "LIMBU VOWEL SIGN E", 0x21, "Limbu"),
    c(0x1928, None, "LIMBU VOWEL SIGN O", 0x21, "Limbu"),
    c(0x1929, None, "LIMBU SUBJOINED LETTER YA", 0x21, "Limbu"),
    c(0x192A, None, "LIMBU SUBJOINED LETTER RA", 0x21, "Limbu"),
    c(0x192B, None, "LIMBU SUBJOINED LETTER WA", 0x21, "Limbu"),
    c(0x1930, None, "LIMBU SMALL LETTER KA", 0x21, "Limbu"),
    c(0x1931, None, "LIMBU SMALL LETTER NGA", 0x21, "Limbu"),
    c(0x1932, None, "LIMBU SMALL LETTER ANUSVARA", 0x21, "Limbu"),
    c(0x1933, None, "LIMBU SMALL LETTER TA", 0x21, "Limbu"),
    c(0x1934, None, "LIMBU SMALL LETTER NA", 0x21, "Limbu"),
    c(0x1935, None, "LIMBU SMALL LETTER PA", 0x21, "Limbu"),
    c(0x1936, None, "LIMBU SMALL LETTER MA", 0x21, "Limbu"),
    c(0x1937, None, "LIMBU SMALL LETTER RA", 0x21, "Limbu"),
    c(0x1938, None, "LIMBU SMALL LETTER LA", 0x21, "Limbu"),
    c(0x1939, None, "LIMBU SIGN MUKPHRENG", 0x20, "Limbu"),
    c(0x193A, None, "LIMBU SIGN KEMPHRENG", 0x20, "Limbu"),
    c(0x193B, None, "LIMBU SIGN SA-I", 0x20, "Limbu"),
    c(0x1940, None, "LIMBU SIGN LOO", 0x00, "Limbu"),
    c(0x1944, None, "LIMBU EXCLAMATION MARK", 0x00, "Limbu"),
    c(0x1945, None, "LIMBU QUESTION MARK", 0x00, "Limbu"),
    c(0x1946, None, "LIMBU DIGIT ZERO", 0x20, "Limbu"),
    c(0x1947, None, "LIMBU DIGIT ONE", 0x20, "Limbu"),
    c(0x1948, None, "LIMBU DIGIT TWO", 0x20, "Limbu"),
    c(0x1949, None, "LIMBU DIGIT THREE", 0x20, "Limbu"),
    c(0x194A, None, "LIMBU DIGIT FOUR", 0x20, "Limbu"),
    c(0x194B, None, "LIMBU DIGIT FIVE", 0x20, "Limbu"),
    c(0x194C, None, "LIMBU DIGIT SIX", 0x20, "Limbu"),
    c(0x194D, None, "LIMBU DIGIT SEVEN", 0x20, "Limbu"),
    c(0x194E, None, "LIMBU DIGIT EIGHT", 0x20, "Limbu"),
    c(0x194F, None, "LIMBU DIGIT NINE", 0x20, "Limbu"),
    c(0x1950, None, "TAI LE LETTER KA", 0x31, "Tai_Le"),
    c(0x1951, None, "TAI LE LETTER XA", 0x31, "Tai_Le"),
    c(0x1952, None, "TAI LE LETTER NGA", 0x31, "Tai_Le"),
    c(0x1953, None, "TAI LE LETTER TSA", 0x31, "Tai_Le"),
    c(0x1954, None, "TAI LE LETTER SA", 0x31, "Tai_Le"),
    c(0x1955, None, "TAI LE LETTER YA", 0x31, "Tai_Le"),
    c(0x1956, None, "TAI LE LETTER TA", 0x31, "Tai_Le"),
    c(0x1957, None, "TAI LE LETTER THA", 0x31, "Tai_Le"),
    c(0x1958, None, "TAI LE LETTER LA", 0x31, "Tai_Le"),
    c(0x1959, None, "TAI LE LETTER PA", 0x31, "Tai_Le"),
    c(0x195A, None, "TAI LE LETTER PHA", 0x31, "Tai_Le"),
    c(0x195B, None, "TAI LE LETTER MA", 0x31, "Tai_Le"),
    c(0x195C, None, "TAI LE LETTER FA", 0x31, "Tai_Le"),
    c(0x195D, None, "TAI LE LETTER VA", 0x31, "Tai_Le"),
    c(0x195E, None, "TAI LE LETTER HA", 0x31, "Tai_Le"),
    c(0x195F, None, "TAI LE LETTER QA", 0x31, "Tai_Le"),
    c(0x1960, None, "TAI LE LETTER KHA", 0x31, "Tai_Le"),
    c(0x1961, None, "TAI LE LETTER TSHA", 0x31, "Tai_Le"),
    c(0x1962, None, "TAI LE LETTER NA", 0x31, "Tai_Le"),
    c(0x1963, None, "TAI LE LETTER A", 0x31, "Tai_Le"),
    c(0x1964, None, "TAI LE LETTER I", 0x31, "Tai_Le"),
    c(0x1965, None, "TAI LE LETTER EE", 0x31, "Tai_Le"),
    c(0x1966, None, "TAI LE LETTER EH", 0x31, "Tai_Le"),
    c(0x1967, None, "TAI LE LETTER U", 0x31, "Tai_Le"),
    c(0x1968, None, "TAI LE LETTER OO", 0x31, "Tai_Le"),
    c(0x1969, None, "TAI LE LETTER O", 0x31, "Tai_Le"),
    c(0x196A, None, "TAI LE LETTER UE", 0x31, "Tai_Le"),
    c(0x196B, None, "TAI LE LETTER E", 0x31, "Tai_Le"),
    c(0x196C, None, "TAI LE LETTER AUE", 0x31, "Tai_Le"),
    c(0x196D, None, "TAI LE LETTER AI", 0x31, "Tai_Le"),
    c(0x1970, None, "TAI LE LETTER TONE-2", 0x31, "Tai_Le"),
    c(0x1971, None, "TAI LE LETTER TONE-3", 0x31, "Tai_Le"),
    c(0x1972, None, "TAI LE LETTER TONE-4", 0x31, "Tai_Le"),
    c(0x1973, None, "TAI LE LETTER TONE-5", 0x31, "Tai_Le"),
    c(0x1974, None, "TAI LE LETTER TONE-6", 0x31, "Tai_Le"),
    c(0x1980, None, "NEW TAI LUE LETTER HIGH QA", 0x31, "New_Tai_Lue"),
    c(0x1981, None, "NEW TAI LUE LETTER LOW QA", 0x31, "New_Tai_Lue"),
    c(0x1982, None, "NEW TAI LUE LETTER HIGH KA", 0x31, "New_Tai_Lue"),
    c(0x1983, None, "NEW TAI LUE LETTER HIGH XA", 0x31, "New_Tai_Lue"),
    c(0x1984, None, "NEW TAI LUE LETTER HIGH NGA", 0x31, "New_Tai_Lue"),
    c(0x1985, None, "NEW TAI LUE LETTER LOW KA", 0x31, "New_Tai_Lue"),
    c(0x1986, None, "NEW TAI LUE LETTER LOW XA", 0x31, "New_Tai_Lue"),
    c(0x1987, None, "NEW TAI LUE LETTER LOW NGA", 0x31, "New_Tai_Lue"),
    c(0x1988, None, "NEW TAI LUE LETTER HIGH TSA", 0x31, "New_Tai_Lue"),
    c(0x1989, None, "NEW TAI LUE LETTER HIGH SA", 0x31, "New_Tai_Lue"),
    c(0x198A, None, "NEW TAI LUE LETTER HIGH YA", 0x31, "New_Tai_Lue"),
    c(0x198B, None, "NEW TAI LUE LETTER LOW TSA", 0x31, "New_Tai_Lue"),
    c(0x198C, None, "NEW TAI LUE LETTER LOW SA", 0x31, "New_Tai_Lue"),
    c(0x198D, None, "NEW TAI LUE LETTER LOW YA", 0x31, "New_Tai_Lue"),
    c(0x198E, None, "NEW TAI LUE LETTER HIGH TA", 0x31, "New_Tai_Lue"),
    c(0x198F, None, "NEW TAI LUE LETTER HIGH THA", 0x31, "New_Tai_Lue"),
    c(0x1990, None, "NEW TAI LUE LETTER HIGH NA", 0x31, "New_Tai_Lue"),
    c(0x1991, None, "NEW TAI LUE LETTER LOW TA", 0x31, "New_Tai_Lue"),
    c(0x1992, None, "NEW TAI LUE LETTER LOW THA", 0x31, "New_Tai_Lue"),
    c(0x1993, None, "NEW TAI LUE LETTER LOW NA", 0x31, "New_Tai_Lue"),
    c(0x1994, None, "NEW TAI LUE LETTER HIGH PA", 0x31, "New_Tai_Lue"),
    c(0x1995, None, "NEW TAI LUE LETTER HIGH PHA", 0x31, "New_Tai_Lue"),
    c(0x1996, None, "NEW TAI LUE LETTER HIGH MA", 0x31, "New_Tai_Lue"),
    c(0x1997, None, "NEW TAI LUE LETTER LOW PA", 0x31, "New_Tai_Lue"),
    c(0x1998, None, "NEW TAI LUE LETTER LOW PHA", 0x31, "New_Tai_Lue"),
    c(0x1999, None, "NEW TAI LUE LETTER LOW MA", 0x31, "New_Tai_Lue"),
    c(0x199A, None, "NEW TAI LUE LETTER HIGH FA", 0x31, "New_Tai_Lue"),
    c(0x199B, None, "NEW TAI LUE LETTER HIGH VA", 0x31, "New_Tai_Lue"),
    c(0x199C, None, "NEW TAI LUE LETTER HIGH LA", 0x31, "New_Tai_Lue"),
    c(0x199D, None, "NEW TAI LUE LETTER LOW FA", 0x31, "New_Tai_Lue"),
    c(0x199E, None, "NEW TAI LUE LETTER LOW VA", 0x31, "New_Tai_Lue"),
    c(0x199F, None, "NEW TAI LUE LETTER LOW LA", 0x31, "New_Tai_Lue"),
    c(0x19A0, None, "NEW TAI LUE LETTER HIGH HA", 0x31, "New_Tai_Lue"),
    c(0x19A1, None, "NEW TAI LUE LETTER HIGH DA", 0x31, "New_Tai_Lue"),
    c(0x19A2, None, "NEW TAI LUE LETTER HIGH BA", 0x31, "New_Tai_Lue"),
    c(0x19A3, None, "NEW TAI LUE LETTER LOW HA", 0x31, "New_Tai_Lue"),
    c(0x19A4, None, "NEW TAI LUE LETTER LOW DA", 0x31, "New_Tai_Lue"),
    c(0x19A5, None, "NEW TAI LUE LETTER LOW BA", 0x31, "New_Tai_Lue"),
    c(0x19A6, None, "NEW TAI LUE LETTER HIGH KVA", 0x31, "New_Tai_Lue"),
    c(0x19A7, None, "NEW TAI LUE LETTER HIGH XVA", 0x31, "New_Tai_Lue"),
    c(0x19A8, None, "NEW TAI LUE LETTER LOW KVA", 0x31, "New_Tai_Lue"),
    c(0x19A9, None, "NEW TAI LUE LETTER LOW XVA", 0x31, "New_Tai_Lue"),
    c(0x19AA, None, "NEW TAI LUE LETTER HIGH SUA", 0x31, "New_Tai_Lue"),
    c(0x19AB, None, "NEW TAI LUE LETTER LOW SUA", 0x31, "New_Tai_Lue"),
    c(0x19B0, None, "NEW TAI LUE VOWEL SIGN VOWEL SHORTENER", 0x31, "New_Tai_Lue"),
    c(0x19B1, None, "NEW TAI LUE VOWEL SIGN AA", 0x31, "New_Tai_Lue"),
    c(0x19B2, None, "NEW TAI LUE VOWEL SIGN II", 0x31, "New_Tai_Lue"),
    c(0x19B3, None, "NEW TAI LUE VOWEL SIGN U", 0x31, "New_Tai_Lue"),
    c(0x19B4, None, "NEW TAI LUE VOWEL SIGN UU", 0x31, "New_Tai_Lue"),
    c(0x19B5, None, "NEW TAI LUE VOWEL SIGN E", 0x31, "New_Tai_Lue"),
    c(0x19B6, None, "NEW TAI LUE VOWEL SIGN AE", 0x31, "New_Tai_Lue"),
    c(0x19B7, None, "NEW TAI LUE VOWEL SIGN O", 0x31, "New_Tai_Lue"),
    c(0x19B8, None, "NEW TAI LUE VOWEL SIGN OA", 0x31, "New_Tai_Lue"),
    c(0x19B9, None, "NEW TAI LUE VOWEL SIGN UE", 0x31, "New_Tai_Lue"),
    c(0x19BA, None, "NEW TAI LUE VOWEL SIGN AY", 0x31, "New_Tai_Lue"),
    c(0x19BB, None, "NEW TAI LUE VOWEL SIGN AAY", 0x31, "New_Tai_Lue"),
    c(0x19BC, None, "NEW TAI LUE VOWEL SIGN UY", 0x31, "New_Tai_Lue"),
    c(0x19BD, None, "NEW TAI LUE VOWEL SIGN OY", 0x31, "New_Tai_Lue"),
    c(0x19BE, None, "NEW TAI LUE VOWEL SIGN OAY", 0x31, "New_Tai_Lue"),
    c(0x19BF, None, "NEW TAI LUE VOWEL SIGN UEY", 0x31, "New_Tai_Lue"),
    c(0x19C0, None, "NEW TAI LUE VOWEL SIGN IY", 0x31, "New_Tai_Lue"),
    c(0x19C1, None, "NEW TAI LUE LETTER FINAL V", 0x31, "New_Tai_Lue"),
    c(0x19C2, None, "NEW TAI LUE LETTER FINAL NG", 0x31, "New_Tai_Lue"),
    c(0x19C3, None, "NEW TAI LUE LETTER FINAL N", 0x31, "New_Tai_Lue"),
    c(0x19C4, None, "NEW TAI LUE LETTER FINAL M", 0x31, "New_Tai_Lue"),
    c(0x19C5, None, "NEW TAI LUE LETTER FINAL K", 0x31, "New_Tai_Lue"),
    c(0x19C6, None, "NEW TAI LUE LETTER FINAL D", 0x31, "New_Tai_Lue"),
    c(0x19C7, None, "NEW TAI LUE LETTER FINAL B", 0x31, "New_Tai_Lue"),
    c(0x19C8, None, "NEW TAI LUE TONE MARK-1", 0x31, "New_Tai_Lue"),
    c(0x19C9, None, "NEW TAI LUE TONE MARK-2", 0x31, "New_Tai_Lue"),
    c(0x19D0, None, "NEW TAI LUE DIGIT ZERO", 0x20, "New_Tai_Lue"),
    c(0x19D1, None, "NEW TAI LUE DIGIT ONE", 0x20, "New_Tai_Lue"),
    c(0x19D2, None, "NEW TAI LUE DIGIT TWO", 0x20, "New_Tai_Lue"),
    c(0x19D3, None, "NEW TAI LUE DIGIT THREE", 0x20, "New_Tai_Lue"),
    c(0x19D4, None, "NEW TAI LUE DIGIT FOUR", 0x20, "New_Tai_Lue"),
    c(0x19D5, None, "NEW TAI LUE DIGIT FIVE", 0x20, "New_Tai_Lue"),
    c(0x19D6, None, "NEW TAI LUE DIGIT SIX", 0x20, "New_Tai_Lue"),
    c(0x19D7, None, "NEW TAI LUE DIGIT SEVEN", 0x20, "New_Tai_Lue"),
    c(0x19D8, None, "NEW TAI LUE DIGIT EIGHT", 0x20, "New_Tai_Lue"),
    c(0x19D9, None, "NEW TAI LUE DIGIT NINE", 0x20, "New_Tai_Lue"),
    c(0x19DA, None, "NEW TAI LUE THAM DIGIT ONE", 0x20, "New_Tai_Lue"),
    c(0x19DE, None, "NEW TAI LUE SIGN LAE", 0x00, "New_Tai_Lue"),
    c(0x19DF, None, "NEW TAI LUE SIGN LAEV", 0x00, "New_Tai_Lue"),
    c(0x19E0, None, "KHMER SYMBOL PATHAMASAT", 0x00, "Khmer_Symbols"),
    c(0x19E1, None, "KHMER SYMBOL MUOY KOET", 0x00, "Khmer_Symbols"),
    c(0x19E2, None, "KHMER SYMBOL PII KOET", 0x00, "Khmer_Symbols"),
    c(0x19E3, None, "KHMER SYMBOL BEI KOET", 0x00, "Khmer_Symbols"),
    c(0x19E4, None, "KHMER SYMBOL BUON KOET", 0x00, "Khmer_Symbols"),
    c(0x19E5, None, "KHMER SYMBOL PRAM KOET", 0x00, "Khmer_Symbols"),
    c(0x19E6, None, "KHMER SYMBOL PRAM-MUOY KOET", 0x00, "Khmer_Symbols"),
    c(0x19E7, None, "KHMER SYMBOL PRAM-PII KOET", 0x00, "Khmer_Symbols"),
    c(0x19E8, None, "KHMER SYMBOL PRAM-BEI KOET", 0x00, "Khmer_Symbols"),
    c(0x19E9, None, "KHMER SYMBOL PRAM-BUON KOET", 0x00, "Khmer_Symbols"),
    c(0x19EA, None, "KHMER SYMBOL DAP KOET", 0x00, "Khmer_Symbols"),
    c(0x19EB, None, "KHMER SYMBOL DAP-MUOY KOET", 0x00, "Khmer_Symbols"),
    c(0x19EC, None, "KHMER SYMBOL DAP-PII KOET", 0x00, "Khmer_Symbols"),
    c(0x19ED, None, "KHMER SYMBOL DAP-BEI KOET", 0x00, "Khmer_Symbols"),
    c(0x19EE, None, "KHMER SYMBOL DAP-BUON KOET", 0x00, "Khmer_Symbols"),
    c(0x19EF, None, "KHMER SYMBOL DAP-PRAM KOET", 0x00, "Khmer_Symbols"),
    c(0x19F0, None, "KHMER SYMBOL TUTEYASAT", 0x00, "Khmer_Symbols"),
    c(0x19F1, None, "KHMER SYMBOL MUOY ROC", 0x00, "Khmer_Symbols"),
    c(0x19F2, None, "KHMER SYMBOL PII ROC", 0x00, "Khmer_Symbols"),
    c(0x19F3, None, "KHMER SYMBOL BEI ROC", 0x00, "Khmer_Symbols"),
    c(0x19F4, None, "KHMER SYMBOL BUON ROC", 0x00, "Khmer_Symbols"),
    c(0x19F5, None, "KHMER SYMBOL PRAM ROC", 0x00, "Khmer_Symbols"),
    c(0x19F6, None, "KHMER SYMBOL PRAM-MUOY ROC", 0x00, "Khmer_Symbols"),
    c(0x19F7, None, "KHMER SYMBOL PRAM-PII ROC", 0x00, "Khmer_Symbols"),
    c(0x19F8, None, "KHMER SYMBOL PRAM-BEI ROC", 0x00, "Khmer_Symbols"),
    c(0x19F9, None, "KHMER SYMBOL PRAM-BUON ROC", 0x00, "Khmer_Symbols"),
    c(0x19FA, None, "KHMER SYMBOL DAP ROC", 0x00, "Khmer_Symbols"),
    c(0x19FB, None, "KHMER SYMBOL DAP-MUOY ROC", 0x00, "Khmer_Symbols"),
    c(0x19FC, None, "KHMER SYMBOL DAP-PII ROC", 0x00, "Khmer_Symbols"),
    c(0x19FD, None, "KHMER SYMBOL DAP-BEI ROC", 0x00, "Khmer_Symbols"),
    c(0x19FE, None, "KHMER SYMBOL DAP-BUON ROC", 0x00, "Khmer_Symbols"),
    c(0x19FF, None, "KHMER SYMBOL DAP-PRAM ROC", 0x00, "Khmer_Symbols"),
    c(0x1A00, None, "BUGINESE LETTER KA", 0x31, "Buginese"),
    c(0x1A01, None, "BUGINESE LETTER GA", 0x31, "Buginese"),
    c(0x1A02, None, "BUGINESE LETTER NGA", 0x31, "Buginese"),
    c(0x1A03, None, "BUGINESE LETTER NGKA", 0x31, "Buginese"),
    c(0x1A04, None, "BUGINESE LETTER PA", 0x31, "Buginese"),
    c(0x1A05, None, "BUGINESE LETTER BA", 0x31, "Buginese"),
    c(0x1A06, None, "BUGINESE LETTER MA", 0x31, "Buginese"),
    c(0x1A07, None, "BUGINESE LETTER MPA", 0x31, "Buginese"),
    c(0x1A08, None, "BUGINESE LETTER TA", 0x31, "Buginese"),
    c(0x1A09, None, "BUGINESE LETTER DA", 0x31, "Buginese"),
    c(0x1A0A, None, "BUGINESE LETTER NA", 0x31, "Buginese"),
    c(0x1A0B, None, "BUGINESE LETTER NRA", 0x31, "Buginese"),
    c(0x1A0C, None, "BUGINESE LETTER CA", 0x31, "Buginese"),
    c(0x1A0D, None, "BUGINESE LETTER JA", 0x31, "Buginese"),
    c(0x1A0E, None, "BUGINESE LETTER NYA", 0x31, "Buginese"),
    c(0x1A0F, None, "BUGINESE LETTER NYCA", 0x31, "Buginese"),
    c(0x1A10, None, "BUGINESE LETTER YA", 0x31, "Buginese"),
    c(0x1A11, None, "BUGINESE LETTER RA", 0x31, "Buginese"),
    c(0x1A12, None, "BUGINESE LETTER LA", 0x31, "Buginese"),
    c(0x1A13, None, "BUGINESE LETTER VA", 0x31, "Buginese"),
    c(0x1A14, None, "BUGINESE LETTER SA", 0x31, "Buginese"),
    c(0x1A15, None, "BUGINESE LETTER A", 0x31, "Buginese"),
    c(0x1A16, None, "BUGINESE LETTER HA", 0x31, "Buginese"),
    c(0x1A17, None, "BUGINESE VOWEL SIGN I", 0x21, "Buginese"),
    c(0x1A18, None, "BUGINESE VOWEL SIGN U", 0x21, "Buginese"),
    c(0x1A19, None, "BUGINESE VOWEL SIGN E", 0x21, "Buginese"),
    c(0x1A1A, None, "BUGINESE VOWEL SIGN O", 0x21, "Buginese"),
    c(0x1A1B, None, "BUGINESE VOWEL SIGN AE", 0x21, "Buginese"),
    c(0x1A1E, None, "BUGINESE PALLAWA", 0x00, "Buginese"),
    c(0x1A1F, None, "BUGINESE END OF SECTION", 0x00, "Buginese"),
    c(0x1A20, None, "TAI THAM LETTER HIGH KA", 0x31, "Tai_Tham"),
    c(0x1A21, None, "TAI THAM LETTER HIGH KHA", 0x31, "Tai_Tham"),
    c(0x1A22, None, "TAI THAM LETTER HIGH KXA", 0x31, "Tai_Tham"),
    c(0x1A23, None, "TAI THAM LETTER LOW KA", 0x31, "Tai_Tham"),
    c(0x1A24, None, "TAI THAM LETTER LOW KXA", 0x31, "Tai_Tham"),
    c(0x1A25, None, "TAI THAM LETTER LOW KHA", 0x31, "Tai_Tham"),
    c(0x1A26, None, "TAI THAM LETTER NGA", 0x31, "Tai_Tham"),
    c(0x1A27, None, "TAI THAM LETTER HIGH CA", 0x31, "Tai_Tham"),
    c(0x1A28, None, "TAI THAM LETTER HIGH CHA", 0x31, "Tai_Tham"),
    c(0x1A29, None, "TAI THAM LETTER LOW CA", 0x31, "Tai_Tham"),
    c(0x1A2A, None, "TAI THAM LETTER LOW SA", 0x31, "Tai_Tham"),
    c(0x1A2B, None, "TAI THAM LETTER LOW CHA", 0x31, "Tai_Tham"),
    c(0x1A2C, None, "TAI THAM LETTER NYA", 0x31, "Tai_Tham"),
    c(0x1A2D, None, "TAI THAM LETTER RATA", 0x31, "Tai_Tham"),
    c(0x1A2E, None, "TAI THAM LETTER HIGH RATHA", 0x31, "Tai_Tham"),
    c(0x1A2F, None, "TAI THAM LETTER DA", 0x31, "Tai_Tham"),
    c(0x1A30, None, "TAI THAM LETTER LOW RATHA", 0x31, "Tai_Tham"),
    c(0x1A31, None, "TAI THAM LETTER RANA", 0x31, "Tai_Tham"),
    c(0x1A32, None, "TAI THAM LETTER HIGH TA", 0x31, "Tai_Tham"),
    c(0x1A33, None, "TAI THAM LETTER HIGH THA", 0x31, "Tai_Tham"),
    c(0x1A34, None, "TAI THAM LETTER LOW TA", 0x31, "Tai_Tham"),
    c(0x1A35, None, "TAI THAM LETTER LOW THA", 0x31, "Tai_Tham"),
    c(0x1A36, None, "TAI THAM LETTER NA", 0x31, "Tai_Tham"),
    c(0x1A37, None, "TAI THAM LETTER BA", 0x31, "Tai_Tham"),
    c(0x1A38, None, "TAI THAM LETTER HIGH PA", 0x31, "Tai_Tham"),
    c(0x1A39, None, "TAI THAM LETTER HIGH PHA", 0x31, "Tai_Tham"),
    c(0x1A3A, None, "TAI THAM LETTER HIGH FA", 0x31, "Tai_Tham"),
    c(0x1A3B, None, "TAI THAM LETTER LOW PA", 0x31, "Tai_Tham"),
    c(0x1A3C, None, "TAI THAM LETTER LOW FA", 0x31, "Tai_Tham"),
    c(0x1A3D, None, "TAI THAM LETTER LOW PHA", 0x31, "Tai_Tham"),
    c(0x1A3E, None, "TAI THAM LETTER MA", 0x31, "Tai_Tham"),
    c(0x1A3F, None, "TAI THAM LETTER LOW YA", 0x31, "Tai_Tham"),
    c(0x1A40, None, "TAI THAM LETTER HIGH YA", 0x31, "Tai_Tham"),
    c(0x1A41, None, "TAI THAM LETTER RA", 0x31, "Tai_Tham"),
    c(0x1A42, None, "TAI THAM LETTER RUE", 0x31, "Tai_Tham"),
    c(0x1A43, None, "TAI THAM LETTER LA", 0x31, "Tai_Tham"),
    c(0x1A44, None, "TAI THAM LETTER LUE", 0x31, "Tai_Tham"),
    c(0x1A45, None, "TAI THAM LETTER WA", 0x31, "Tai_Tham"),
    c(0x1A46, None, "TAI THAM LETTER HIGH SHA", 0x31, "Tai_Tham"),
    c(0x1A47, None, "TAI THAM LETTER HIGH SSA", 0x31, "Tai_Tham"),
    c(0x1A48, None, "TAI THAM LETTER HIGH SA", 0x31, "Tai_Tham"),
    c(0x1A49, None, "TAI THAM LETTER HIGH HA", 0x31, "Tai_Tham"),
    c(0x1A4A, None, "TAI THAM LETTER LLA", 0x31, "Tai_Tham"),
    c(0x1A4B, None, "TAI THAM LETTER A", 0x31, "Tai_Tham"),
    c(0x1A4C, None, "TAI THAM LETTER LOW HA", 0x31, "Tai_Tham"),
    c(0x1A4D, None, "TAI THAM LETTER I", 0x31, "Tai_Tham"),
    c(0x1A4E, None, "TAI THAM LETTER II", 0x31, "Tai_Tham"),
    c(0x1A4F, None, "TAI THAM LETTER U", 0x31, "Tai_Tham"),
    c(0x1A50, None, "TAI THAM LETTER UU", 0x31, "Tai_Tham"),
    c(0x1A51, None, "TAI THAM LETTER EE", 0x31, "Tai_Tham"),
    c(0x1A52, None, "TAI THAM LETTER OO", 0x31, "Tai_Tham"),
    c(0x1A53, None, "TAI THAM LETTER LAE", 0x31, "Tai_Tham"),
    c(0x1A54, None, "TAI THAM LETTER GREAT SA", 0x31, "Tai_Tham"),
    c(0x1A55, None, "TAI THAM CONSONANT SIGN MEDIAL RA", 0x21, "Tai_Tham"),
    c(0x1A56, None, "TAI THAM CONSONANT SIGN MEDIAL LA", 0x21, "Tai_Tham"),
    c(0x1A57, None, "TAI THAM CONSONANT SIGN LA TANG LAI", 0x21, "Tai_Tham"),
    c(0x1A58, None, "TAI THAM SIGN MAI KANG LAI", 0x21, "Tai_Tham"),
    c(0x1A59, None, "TAI THAM CONSONANT SIGN FINAL NGA", 0x21, "Tai_Tham"),
    c(0x1A5A, None, "TAI THAM CONSONANT SIGN LOW PA", 0x21, "Tai_Tham"),
    c(0x1A5B, None, "TAI THAM CONSONANT SIGN HIGH RATHA OR LOW PA", 0x21, "Tai_Tham"),
    c(0x1A5C, None, "TAI THAM CONSONANT SIGN MA", 0x21, "Tai_Tham"),
    c(0x1A5D, None, "TAI THAM CONSONANT SIGN BA", 0x21, "Tai_Tham"),
    c(0x1A5E, None, "TAI THAM CONSONANT SIGN SA", 0x21, "Tai_Tham"),
    c(0x1A60, None, "TAI THAM SIGN SAKOT", 0x20, "Tai_Tham"),
    c(0x1A61, None, "TAI THAM VOWEL SIGN A", 0x21, "Tai_Tham"),
    c(0x1A62, None, "TAI THAM VOWEL SIGN MAI SAT", 0x21, "Tai_Tham"),
    c(0x1A63, None, "TAI THAM VOWEL SIGN AA", 0x21, "Tai_Tham"),
    c(0x1A64, None, "TAI THAM VOWEL SIGN TALL AA", 0x21, "Tai_Tham"),
    c(0x1A65, None, "TAI THAM VOWEL SIGN I", 0x21, "Tai_Tham"),
    c(0x1A66, None, "TAI THAM VOWEL SIGN II", 0x21, "Tai_Tham"),
    c(0x1A67, None, "TAI THAM VOWEL SIGN UE", 0x21, "Tai_Tham"),
    c(0x1A68, None, "TAI THAM VOWEL SIGN UUE", 0x21, "Tai_Tham"),
    c(0x1A69, None, "TAI THAM VOWEL SIGN U", 0x21, "Tai_Tham"),
    c(0x1A6A, None, "TAI THAM VOWEL SIGN UU", 0x21, "Tai_Tham"),
    c(0x1A6B, None, "TAI THAM VOWEL SIGN O", 0x21, "Tai_Tham"),
    c(0x1A6C, None, "TAI THAM VOWEL SIGN OA BELOW", 0x21, "Tai_Tham"),
    c(0x1A6D, None, "TAI THAM VOWEL SIGN OY", 0x21, "Tai_Tham"),
    c(0x1A6E, None, "TAI THAM VOWEL SIGN E", 0x21, "Tai_Tham"),
    c(0x1A6F, None, "TAI THAM VOWEL SIGN AE", 0x21, "Tai_Tham"),
    c(0x1A70, None, "TAI THAM VOWEL SIGN OO", 0x21, "Tai_Tham"),
    c(0x1A71, None, "TAI THAM VOWEL SIGN AI", 0x21, "Tai_Tham"),
    c(0x1A72, None, "TAI THAM VOWEL SIGN THAM AI", 0x21, "Tai_Tham"),
    c(0x1A73, None, "TAI THAM VOWEL SIGN OA ABOVE", 0x21, "Tai_Tham"),
    c(0x1A74, None, "TAI THAM SIGN MAI KANG", 0x21, "Tai_Tham"),
    c(0x1A75, None, "TAI THAM SIGN TONE-1", 0x20, "Tai_Tham"),
    c(0x1A76, None, "TAI THAM SIGN TONE-2", 0x20, "Tai_Tham"),
    c(0x1A77, None, "TAI THAM SIGN KHUEN TONE-3", 0x20, "Tai_Tham"),
    c(0x1A78, None, "TAI THAM SIGN KHUEN TONE-4", 0x20, "Tai_Tham"),
    c(0x1A79, None, "TAI THAM SIGN KHUEN TONE-5", 0x20, "Tai_Tham"),
    c(0x1A7A, None, "TAI THAM SIGN RA HAAM", 0x20, "Tai_Tham"),
    c(0x1A7B, None, "TAI THAM SIGN MAI SAM", 0x20, "Tai_Tham"),
    c(0x1A7C, None, "TAI THAM SIGN KHUEN-LUE KARAN", 0x20, "Tai_Tham"),
    c(0x1A7F, None, "TAI THAM COMBINING CRYPTOGRAMMIC DOT", 0x20, "Tai_Tham"),
    c(0x1A80, None, "TAI THAM HORA DIGIT ZERO", 0x20, "Tai_Tham"),
    c(0x1A81, None, "TAI THAM HORA DIGIT ONE", 0x20, "Tai_Tham"),
    c(0x1A82, None, "TAI THAM HORA DIGIT TWO", 0x20, "Tai_Tham"),
    c(0x1A83, None, "TAI THAM HORA DIGIT THREE", 0x20, "Tai_Tham"),
    c(0x1A84, None, "TAI THAM HORA DIGIT FOUR", 0x20, "Tai_Tham"),
    c(0x1A85, None, "TAI THAM HORA DIGIT FIVE", 0x20, "Tai_Tham"),
    c(0x1A86, None, "TAI THAM HORA DIGIT SIX", 0x20, "Tai_Tham"),
    c(0x1A87, None, "TAI THAM HORA DIGIT SEVEN", 0x20, "Tai_Tham"),
    c(0x1A88, None, "TAI THAM HORA DIGIT EIGHT", 0x20, "Tai_Tham"),
    c(0x1A89, None, "TAI THAM HORA DIGIT NINE", 0x20, "Tai_Tham"),
    c(0x1A90, None, "TAI THAM THAM DIGIT ZERO", 0x20, "Tai_Tham"),
    c(0x1A91, None, "TAI THAM THAM DIGIT ONE", 0x20, "Tai_Tham"),
    c(0x1A92, None, "TAI THAM THAM DIGIT TWO", 0x20, "Tai_Tham"),
    c(0x1A93, None, "TAI THAM THAM DIGIT THREE", 0x20, "Tai_Tham"),
    c(0x1A94, None, "TAI THAM THAM DIGIT FOUR", 0x20, "Tai_Tham"),
    c(0x1A95, None, "TAI THAM THAM DIGIT FIVE", 0x20, "Tai_Tham"),
    c(0x1A96, None, "TAI THAM THAM DIGIT SIX", 0x20, "Tai_Tham"),
    c(0x1A97, None, "TAI THAM THAM DIGIT SEVEN", 0x20, "Tai_Tham"),
    c(0x1A98, None, "TAI THAM THAM DIGIT EIGHT", 0x20, "Tai_Tham"),
    c(0x1A99, None, "TAI THAM THAM DIGIT NINE", 0x20, "Tai_Tham"),
    c(0x1AA0, None, "TAI THAM SIGN WIANG", 0x00, "Tai_Tham"),
    c(0x1AA1, None, "TAI THAM SIGN WIANGWAAK", 0x00, "Tai_Tham"),
    c(0x1AA2, None, "TAI THAM SIGN SAWAN", 0x00, "Tai_Tham"),
    c(0x1AA3, None, "TAI THAM SIGN KEOW", 0x00, "Tai_Tham"),
    c(0x1AA4, None, "TAI THAM SIGN HOY", 0x00, "Tai_Tham"),
    c(0x1AA5, None, "TAI THAM SIGN DOKMAI", 0x00, "Tai_Tham"),
    c(0x1AA6, None, "TAI THAM SIGN REVERSED ROTATED RANA", 0x00, "Tai_Tham"),
    c(0x1AA7, None, "TAI THAM SIGN MAI YAMOK", 0x31, "Tai_Tham"),
    c(0x1AA8, None, "TAI THAM SIGN KAAN", 0x00, "Tai_Tham"),
    c(0x1AA9, None, "TAI THAM SIGN KAANKUU", 0x00, "Tai_Tham"),
    c(0x1AAA, None, "TAI THAM SIGN SATKAAN", 0x00, "Tai_Tham"),
    c(0x1AAB, None, "TAI THAM SIGN SATKAANKUU", 0x00, "Tai_Tham"),
    c(0x1AAC, None, "TAI THAM SIGN HANG", 0x00, "Tai_Tham"),
    c(0x1AAD, None, "TAI THAM SIGN CAANG", 0x00, "Tai_Tham"),
    c(0x1AB0, None, "COMBINING DOUBLED CIRCUMFLEX ACCENT", 0x20, "Diacriticals_Ext"),
    c(0x1AB1, None, "COMBINING DIAERESIS-RING", 0x20, "Diacriticals_Ext"),
    c(0x1AB2, None, "COMBINING INFINITY", 0x20, "Diacriticals_Ext"),
    c(0x1AB3, None, "COMBINING DOWNWARDS ARROW", 0x20, "Diacriticals_Ext"),
    c(0x1AB4, None, "COMBINING TRIPLE DOT", 0x20, "Diacriticals_Ext"),
    c(0x1AB5, None, "COMBINING X-X BELOW", 0x20, "Diacriticals_Ext"),
    c(0x1AB6, None, "COMBINING WIGGLY LINE BELOW", 0x20, "Diacriticals_Ext"),
    c(0x1AB7, None, "COMBINING OPEN MARK BELOW", 0x20, "Diacriticals_Ext"),
    c(0x1AB8, None, "COMBINING DOUBLE OPEN MARK BELOW", 0x20, "Diacriticals_Ext"),
    c(0x1AB9, None, "COMBINING LIGHT CENTRALIZATION STROKE BELOW", 0x20, "Diacriticals_Ext"),
    c(0x1ABA, None, "COMBINING STRONG CENTRALIZATION STROKE BELOW", 0x20, "Diacriticals_Ext"),
    c(0x1ABB, None, "COMBINING PARENTHESES ABOVE", 0x20, "Diacriticals_Ext"),
    c(0x1ABC, None, "COMBINING DOUBLE PARENTHESES ABOVE", 0x20, "Diacriticals_Ext"),
    c(0x1ABD, None, "COMBINING PARENTHESES BELOW", 0x20, "Diacriticals_Ext"),
    c(0x1ABE, None, "COMBINING PARENTHESES OVERLAY", 0x00, "Diacriticals_Ext"),
    c(0x1ABF, None, "COMBINING LATIN SMALL LETTER W BELOW", 0x21, "Diacriticals_Ext"),
    c(0x1AC0, None, "COMBINING LATIN SMALL LETTER TURNED W BELOW", 0x21, "Diacriticals_Ext"),
    c(0x1AC1, None, "COMBINING LEFT PARENTHESIS ABOVE LEFT", 0x20, "Diacriticals_Ext"),
    c(0x1AC2, None, "COMBINING RIGHT PARENTHESIS ABOVE RIGHT", 0x20, "Diacriticals_Ext"),
    c(0x1AC3, None, "COMBINING LEFT PARENTHESIS BELOW LEFT", 0x20, "Diacriticals_Ext"),
    c(0x1AC4, None, "COMBINING RIGHT PARENTHESIS BELOW RIGHT", 0x20, "Diacriticals_Ext"),
    c(0x1AC5, None, "COMBINING SQUARE BRACKETS ABOVE", 0x20, "Diacriticals_Ext"),
    c(0x1AC6, None, "COMBINING NUMBER SIGN ABOVE", 0x20, "Diacriticals_Ext"),
    c(0x1AC7, None, "COMBINING INVERTED DOUBLE ARCH ABOVE", 0x20, "Diacriticals_Ext"),
    c(0x1AC8, None, "COMBINING PLUS SIGN ABOVE", 0x20, "Diacriticals_Ext"),
    c(0x1AC9, None, "COMBINING DOUBLE PLUS SIGN ABOVE", 0x20, "Diacriticals_Ext"),
    c(0x1ACA, None, "COMBINING DOUBLE PLUS SIGN BELOW", 0x20, "Diacriticals_Ext"),
    c(0x1ACB, None, "COMBINING TRIPLE ACUTE ACCENT", 0x20, "Diacriticals_Ext"),
    c(0x1ACC, None, "COMBINING LATIN SMALL LETTER INSULAR G", 0x21, "Diacriticals_Ext"),
    c(0x1ACD, None, "COMBINING LATIN SMALL LETTER INSULAR R", 0x21, "Diacriticals_Ext"),
    c(0x1ACE, None, "COMBINING LATIN SMALL LETTER INSULAR T", 0x21, "Diacriticals_Ext"),
    c(0x1B00, None, "BALINESE SIGN ULU RICEM", 0x21, "Balinese"),
    c(0x1B01, None, "BALINESE SIGN ULU CANDRA", 0x21, "Balinese"),
    c(0x1B02, None, "BALINESE SIGN CECEK", 0x21, "Balinese"),
    c(0x1B03, None, "BALINESE SIGN SURANG", 0x21, "Balinese"),
    c(0x1B04, None, "BALINESE SIGN BISAH", 0x21, "Balinese"),
    c(0x1B05, None, "BALINESE LETTER AKARA", 0x31, "Balinese"),
    c(0x1B06, None, "BALINESE LETTER AKARA TEDUNG", 0x31, "Balinese"),
    c(0x1B07, None, "BALINESE LETTER IKARA", 0x31, "Balinese"),
    c(0x1B08, None, "BALINESE LETTER IKARA TEDUNG", 0x31, "Balinese"),
    c(0x1B09, None, "BALINESE LETTER UKARA", 0x31, "Balinese"),
    c(0x1B0A, None, "BALINESE LETTER UKARA TEDUNG", 0x31, "Balinese"),
    c(0x1B0B, None, "BALINESE LETTER RA REPA", 0x31, "Balinese"),
    c(0x1B0C, None, "BALINESE LETTER RA REPA TEDUNG", 0x31, "Balinese"),
    c(0x1B0D, None, "BALINESE LETTER LA LENGA", 0x31, "Balinese"),
    c(0x1B0E, None, "BALINESE LETTER LA LENGA TEDUNG", 0x31, "Balinese"),
    c(0x1B0F, None, "BALINESE LETTER EKARA", 0x31, "Balinese"),
    c(0x1B10, None, "BALINESE LETTER AIKARA", 0x31, "Balinese"),
    c(0x1B11, None, "BALINESE LETTER OKARA", 0x31, "Balinese"),
    c(0x1B12, None, "BALINESE LETTER OKARA TEDUNG", 0x31, "Balinese"),
    c(0x1B13, None, "BALINESE LETTER KA", 0x31, "Balinese"),
    c(0x1B14, None, "BALINESE LETTER KA MAHAPRANA", 0x31, "Balinese"),
    c(0x1B15, None, "BALINESE LETTER GA", 0x31, "Balinese"),
    c(0x1B16, None, "BALINESE LETTER GA GORA", 0x31, "Balinese"),
    c(0x1B17, None, "BALINESE LETTER NGA", 0x31, "Balinese"),
    c(0x1B18, None, "BALINESE LETTER CA", 0x31, "Balinese"),
    c(0x1B19, None, "BALINESE LETTER CA LACA", 0x31, "Balinese"),
    c(0x1B1A, None, "BALINESE LETTER JA", 0x31, "Balinese"),
    c(0x1B1B, None, "BALINESE LETTER JA JERA", 0x31, "Balinese"),
    c(0x1B1C, None, "BALINESE LETTER NYA", 0x31, "Balinese"),
    c(0x1B1D, None, "BALINESE LETTER TA LATIK", 0x31, "Balinese"),
    c(0x1B1E, None, "BALINESE LETTER TA MURDA MAHAPRANA", 0x31, "Balinese"),
    c(0x1B1F, None, "BALINESE LETTER DA MURDA ALPAPRANA", 0x31, "Balinese"),
    c(0x1B20, None, "BALINESE LETTER DA MURDA MAHAPRANA", 0x31, "Balinese"),
    c(0x1B21, None, "BALINESE LETTER NA RAMBAT", 0x31, "Balinese"),
    c(0x1B22, None, "BALINESE LETTER TA", 0x31, "Balinese"),
    c(0x1B23, None, "BALINESE LETTER TA TAWA", 0x31, "Balinese"),
    c(0x1B24, None, "BALINESE LETTER DA", 0x31, "Balinese"),
    c(0x1B25, None, "BALINESE LETTER DA MADU", 0x31, "Balinese"),
    c(0x1B26, None, "BALINESE LETTER NA", 0x31, "Balinese"),
    c(0x1B27, None, "BALINESE LETTER PA", 0x31, "Balinese"),
    c(0x1B28, None, "BALINESE LETTER PA KAPAL", 0x31, "Balinese"),
    c(0x1B29, None, "BALINESE LETTER BA", 0x31, "Balinese"),
    c(0x1B2A, None, "BALINESE LETTER BA KEMBANG", 0x31, "Balinese"),
    c(0x1B2B, None, "BALINESE LETTER MA", 0x31, "Balinese"),
    c(0x1B2C, None, "BALINESE LETTER YA", 0x31, "Balinese"),
    c(0x1B2D, None, "BALINESE LETTER RA", 0x31, "Balinese"),
    c(0x1B2E, None, "BALINESE LETTER LA", 0x31, "Balinese"),
    c(0x1B2F, None, "BALINESE LETTER WA", 0x31, "Balinese"),
    c(0x1B30, None, "BALINESE LETTER SA SAGA", 0x31, "Balinese"),
    c(0x1B31, None, "BALINESE LETTER SA SAPA", 0x31, "Balinese"),
    c(0x1B32, None, "BALINESE LETTER SA", 0x31, "Balinese"),
    c(0x1B33, None, "BALINESE LETTER HA", 0x31, "Balinese"),
    c(0x1B34, None, "BALINESE SIGN REREKAN", 0x20, "Balinese"),
    c(0x1B35, None, "BALINESE VOWEL SIGN TEDUNG", 0x21, "Balinese"),
    c(0x1B36, None, "BALINESE VOWEL SIGN ULU", 0x21, "Balinese"),
    c(0x1B37, None, "BALINESE VOWEL SIGN ULU SARI", 0x21, "Balinese"),
    c(0x1B38, None, "BALINESE VOWEL SIGN SUKU", 0x21, "Balinese"),
    c(0x1B39, None, "BALINESE VOWEL SIGN SUKU ILUT", 0x21, "Balinese"),
    c(0x1B3A, None, "BALINESE VOWEL SIGN RA REPA", 0x21, "Balinese"),
    c(0x1B3B, None, "BALINESE VOWEL SIGN RA REPA TEDUNG", 0x21, "Balinese"),
    c(0x1B3C, None, "BALINESE VOWEL SIGN LA LENGA", 0x21, "Balinese"),
    c(0x1B3D, None, "BALINESE VOWEL SIGN LA LENGA TEDUNG", 0x21, "Balinese"),
    c(0x1B3E, None, "BALINESE VOWEL SIGN TALING", 0x21, "Balinese"),
    c(0x1B3F, None, "BALINESE VOWEL SIGN TALING REPA", 0x21, "Balinese"),
    c(0x1B40, None, "BALINESE VOWEL SIGN TALING TEDUNG", 0x21, "Balinese"),
    c(0x1B41, None, "BALINESE VOWEL SIGN TALING REPA TEDUNG", 0x21, "Balinese"),
    c(0x1B42, None, "BALINESE VOWEL SIGN PEPET", 0x21, "Balinese"),
    c(0x1B43, None, "BALINESE VOWEL SIGN PEPET TEDUNG", 0x21, "Balinese"),
    c(0x1B44, None, "BALINESE ADEG ADEG", 0x20, "Balinese"),
    c(0x1B45, None, "BALINESE LETTER KAF SASAK", 0x31, "Balinese"),
    c(0x1B46, None, "BALINESE LETTER KHOT SASAK", 0x31, "Balinese"),
    c(0x1B47, None, "BALINESE LETTER TZIR SASAK", 0x31, "Balinese"),
    c(0x1B48, None, "BALINESE LETTER EF SASAK", 0x31, "Balinese"),
    c(0x1B49, None, "BALINESE LETTER VE SASAK", 0x31, "Balinese"),
    c(0x1B4A, None, "BALINESE LETTER ZAL SASAK", 0x31, "Balinese"),
    c(0x1B4B, None, "BALINESE LETTER ASYURA SASAK", 0x31, "Balinese"),
    c(0x1B4C, None, "BALINESE LETTER ARCHAIC JNYA", 0x31, "Balinese"),
    c(0x1B50, None, "BALINESE DIGIT ZERO", 0x20, "Balinese"),
    c(0x1B51, None, "BALINESE DIGIT ONE", 0x20, "Balinese"),
    c(0x1B52, None, "BALINESE DIGIT TWO", 0x20, "Balinese"),
    c(0x1B53, None, "BALINESE DIGIT THREE", 0x20, "Balinese"),
    c(0x1B54, None, "BALINESE DIGIT FOUR", 0x20, "Balinese"),
    c(0x1B55, None, "BALINESE DIGIT FIVE", 0x20, "Balinese"),
    c(0x1B56, None, "BALINESE DIGIT SIX", 0x20, "Balinese"),
    c(0x1B57, None, "BALINESE DIGIT SEVEN", 0x20, "Balinese"),
    c(0x1B58, None, "BALINESE DIGIT EIGHT", 0x20, "Balinese"),
    c(0x1B59, None, "BALINESE DIGIT NINE", 0x20, "Balinese"),
    c(0x1B5A, None, "BALINESE PANTI", 0x00, "Balinese"),
    c(0x1B5B, None, "BALINESE PAMADA", 0x00, "Balinese"),
    c(0x1B5C, None, "BALINESE WINDU", 0x00, "Balinese"),
    c(0x1B5D, None, "BALINESE CARIK PAMUNGKAH", 0x00, "Balinese"),
    c(0x1B5E, None, "BALINESE CARIK SIKI", 0x00, "Balinese"),
    c(0x1B5F, None, "BALINESE CARIK PAREREN", 0x00, "Balinese"),
    c(0x1B60, None, "BALINESE PAMENENG", 0x00, "Balinese"),
    c(0x1B61, None, "BALINESE MUSICAL SYMBOL DONG", 0x00, "Balinese"),
    c(0x1B62, None, "BALINESE MUSICAL SYMBOL DENG", 0x00, "Balinese"),
    c(0x1B63, None, "BALINESE MUSICAL SYMBOL DUNG", 0x00, "Balinese"),
    c(0x1B64, None, "BALINESE MUSICAL SYMBOL DANG", 0x00, "Balinese"),
    c(0x1B65, None, "BALINESE MUSICAL SYMBOL DANG SURANG", 0x00, "Balinese"),
    c(0x1B66, None, "BALINESE MUSICAL SYMBOL DING", 0x00, "Balinese"),
    c(0x1B67, None, "BALINESE MUSICAL SYMBOL DAENG", 0x00, "Balinese"),
    c(0x1B68, None, "BALINESE MUSICAL SYMBOL DEUNG", 0x00, "Balinese"),
    c(0x1B69, None, "BALINESE MUSICAL SYMBOL DAING", 0x00, "Balinese"),
    c(0x1B6A, None, "BALINESE MUSICAL SYMBOL DANG GEDE", 0x00, "Balinese"),
    c(0x1B6B, None, "BALINESE MUSICAL SYMBOL COMBINING TEGEH", 0x20, "Balinese"),
    c(0x1B6C, None, "BALINESE MUSICAL SYMBOL COMBINING ENDEP", 0x20, "Balinese"),
    c(0x1B6D, None, "BALINESE MUSICAL SYMBOL COMBINING KEMPUL", 0x20, "Balinese"),
    c(0x1B6E, None, "BALINESE MUSICAL SYMBOL COMBINING KEMPLI", 0x20, "Balinese"),
    c(0x1B6F, None, "BALINESE MUSICAL SYMBOL COMBINING JEGOGAN", 0x20, "Balinese"),
    c(0x1B70, None, "BALINESE MUSICAL SYMBOL COMBINING KEMPUL WITH JEGOGAN", 0x20, "Balinese"),
    c(0x1B71, None, "BALINESE MUSICAL SYMBOL COMBINING KEMPLI WITH JEGOGAN", 0x20, "Balinese"),
    c(0x1B72, None, "BALINESE MUSICAL SYMBOL COMBINING BENDE", 0x20, "Balinese"),
    c(0x1B73, None, "BALINESE MUSICAL SYMBOL COMBINING GONG", 0x20, "Balinese"),
    c(0x1B74, None, "BALINESE MUSICAL SYMBOL RIGHT-HAND OPEN DUG", 0x00, "Balinese"),
    c(0x1B75, None, "BALINESE MUSICAL SYMBOL RIGHT-HAND OPEN DAG", 0x00, "Balinese"),
    c(0x1B76, None, "BALINESE MUSICAL SYMBOL RIGHT-HAND CLOSED TUK", 0x00, "Balinese"),
    c(0x1B77, None, "BALINESE MUSICAL SYMBOL RIGHT-HAND CLOSED TAK", 0x00, "Balinese"),
    c(0x1B78, None, "BALINESE MUSICAL SYMBOL LEFT-HAND OPEN PANG", 0x00, "Balinese"),
    c(0x1B79, None, "BALINESE MUSICAL SYMBOL LEFT-HAND OPEN PUNG", 0x00, "Balinese"),
    c(0x1B7A, None, "BALINESE MUSICAL SYMBOL LEFT-HAND CLOSED PLAK", 0x00, "Balinese"),
    c(0x1B7B, None, "BALINESE MUSICAL SYMBOL LEFT-HAND CLOSED PLUK", 0x00, "Balinese"),
    c(0x1B7C, None, "BALINESE MUSICAL SYMBOL LEFT-HAND OPEN PING", 0x00, "Balinese"),
    c(0x1B7D, None, "BALINESE PANTI LANTANG", 0x00, "Balinese"),
    c(0x1B7E, None, "BALINESE PAMADA LANTANG", 0x00, "Balinese"),
    c(0x1B80, None, "SUNDANESE SIGN PANYECEK", 0x21, "Sundanese"),
    c(0x1B81, None, "SUNDANESE SIGN PANGLAYAR", 0x21, "Sundanese"),
    c(0x1B82, None, "SUNDANESE SIGN PANGWISAD", 0x21, "Sundanese"),
    c(0x1B83, None, "SUNDANESE LETTER A", 0x31, "Sundanese"),
    c(0x1B84, None, "SUNDANESE LETTER I", 0x31, "Sundanese"),
    c(0x1B85, None, "SUNDANESE LETTER U", 0x31, "Sundanese"),
    c(0x1B86, None, "SUNDANESE LETTER AE", 0x31, "Sundanese"),
    c(0x1B87, None, "SUNDANESE LETTER O", 0x31, "Sundanese"),
    c(0x1B88, None, "SUNDANESE LETTER E", 0x31, "Sundanese"),
    c(0x1B89, None, "SUNDANESE LETTER EU", 0x31, "Sundanese"),
    c(0x1B8A, None, "SUNDANESE LETTER KA", 0x31, "Sundanese"),
    c(0x1B8B, None, "SUNDANESE LETTER QA", 0x31, "Sundanese"),
    c(0x1B8C, None, "SUNDANESE LETTER GA", 0x31, "Sundanese"),
    c(0x1B8D, None, "SUNDANESE LETTER NGA", 0x31, "Sundanese"),
    c(0x1B8E, None, "SUNDANESE LETTER CA", 0x31, "Sundanese"),
    c(0x1B8F, None, "SUNDANESE LETTER JA", 0x31, "Sundanese"),
    c(0x1B90, None, "SUNDANESE LETTER ZA", 0x31, "Sundanese"),
    c(0x1B91, None, "SUNDANESE LETTER NYA", 0x31, "Sundanese"),
    c(0x1B92, None, "SUNDANESE LETTER TA", 0x31, "Sundanese"),
    c(0x1B93, None, "SUNDANESE LETTER DA", 0x31, "Sundanese"),
    c(0x1B94, None, "SUNDANESE LETTER NA", 0x31, "Sundanese"),
    c(0x1B95, None, "SUNDANESE LETTER PA", 0x31, "Sundanese"),
    c(0x1B96, None, "SUNDANESE LETTER FA", 0x31, "Sundanese"),
    c(0x1B97, None, "SUNDANESE LETTER VA", 0x31, "Sundanese"),
    c(0x1B98, None, "SUNDANESE LETTER BA", 0x31, "Sundanese"),
    c(0x1B99, None, "SUNDANESE LETTER MA", 0x31, "Sundanese"),
    c(0x1B9A, None, "SUNDANESE LETTER YA", 0x31, "Sundanese"),
    c(0x1B9B, None, "SUNDANESE LETTER RA", 0x31, "Sundanese"),
    c(0x1B9C, None, "SUNDANESE LETTER LA", 0x31, "Sundanese"),
    c(0x1B9D, None, "SUNDANESE LETTER WA", 0x31, "Sundanese"),
    c(0x1B9E, None, "SUNDANESE LETTER SA", 0x31, "Sundanese"),
    c(0x1B9F, None, "SUNDANESE LETTER XA", 0x31, "Sundanese"),
    c(0x1BA0, None, "SUNDANESE LETTER HA", 0x31, "Sundanese"),
    c(0x1BA1, None, "SUNDANESE CONSONANT SIGN PAMINGKAL", 0x21, "Sundanese"),
    c(0x1BA2, None, "SUNDANESE CONSONANT SIGN PANYAKRA", 0x21, "Sundanese"),
    c(0x1BA3, None, "SUNDANESE CONSONANT SIGN PANYIKU", 0x21, "Sundanese"),
    c(0x1BA4, None, "SUNDANESE VOWEL SIGN PANGHULU", 0x21, "Sundanese"),
    c(0x1BA5, None, "SUNDANESE VOWEL SIGN PANYUKU", 0x21, "Sundanese"),
    c(0x1BA6, None, "SUNDANESE VOWEL SIGN PANAELAENG", 0x21, "Sundanese"),
    c(0x1BA7, None, "SUNDANESE VOWEL SIGN PANOLONG", 0x21, "Sundanese"),
    c(0x1BA8, None, "SUNDANESE VOWEL SIGN PAMEPET", 0x21, "Sundanese"),
    c(0x1BA9, None, "SUNDANESE VOWEL SIGN PANEULEUNG", 0x21, "Sundanese"),
    c(0x1BAA, None, "SUNDANESE SIGN PAMAAEH", 0x20, "Sundanese"),
    c(0x1BAB, None, "SUNDANESE SIGN VIRAMA", 0x20, "Sundanese"),
    c(0x1BAC, None, "SUNDANESE CONSONANT SIGN PASANGAN MA", 0x21, "Sundanese"),
    c(0x1BAD, None, "SUNDANESE CONSONANT SIGN PASANGAN WA", 0x21, "Sundanese"),
    c(0x1BAE, None, "SUNDANESE LETTER KHA", 0x31, "Sundanese"),
    c(0x1BAF, None, "SUNDANESE LETTER SYA", 0x31, "Sundanese"),
    c(0x1BB0, None, "SUNDANESE DIGIT ZERO", 0x20, "Sundanese"),
    c(0x1BB1, None, "SUNDANESE DIGIT ONE", 0x20, "Sundanese"),
    c(0x1BB2, None, "SUNDANESE DIGIT TWO", 0x20, "Sundanese"),
    c(0x1BB3, None, "SUNDANESE DIGIT THREE", 0x20, "Sundanese"),
    c(0x1BB4, None, "SUNDANESE DIGIT FOUR", 0x20, "Sundanese"),
    c(0x1BB5, None, "SUNDANESE DIGIT FIVE", 0x20, "Sundanese"),
    c(0x1BB6, None, "SUNDANESE DIGIT SIX", 0x20, "Sundanese"),
    c(0x1BB7, None, "SUNDANESE DIGIT SEVEN", 0x20, "Sundanese"),
    c(0x1BB8, None, "SUNDANESE DIGIT EIGHT", 0x20, "Sundanese"),
    c(0x1BB9, None, "SUNDANESE DIGIT NINE", 0x20, "Sundanese"),
    c(0x1BBA, None, "SUNDANESE AVAGRAHA", 0x31, "Sundanese"),
    c(0x1BBB, None, "SUNDANESE LETTER REU", 0x31, "Sundanese"),
    c(0x1BBC, None, "SUNDANESE LETTER LEU", 0x31, "Sundanese"),
    c(0x1BBD, None, "SUNDANESE LETTER BHA", 0x31, "Sundanese"),
    c(0x1BBE, None, "SUNDANESE LETTER FINAL K", 0x31, "Sundanese"),
    c(0x1BBF, None, "SUNDANESE LETTER FINAL M", 0x31, "Sundanese"),
    c(0x1BC0, None, "BATAK LETTER A", 0x31, "Batak"),
    c(0x1BC1, None, "BATAK LETTER SIMALUNGUN A", 0x31, "Batak"),
    c(0x1BC2, None, "BATAK LETTER HA", 0x31, "Batak"),
    c(0x1BC3, None, "BATAK LETTER SIMALUNGUN HA", 0x31, "Batak"),
    c(0x1BC4, None, "BATAK LETTER MANDAILING HA", 0x31, "Batak"),
    c(0x1BC5, None, "BATAK LETTER BA", 0x31, "Batak"),
    c(0x1BC6, None, "BATAK LETTER KARO BA", 0x31, "Batak"),
    c(0x1BC7, None, "BATAK LETTER PA", 0x31, "Batak"),
    c(0x1BC8, None, "BATAK LETTER SIMALUNGUN PA", 0x31, "Batak"),
    c(0x1BC9, None, "BATAK LETTER NA", 0x31, "Batak"),
    c(0x1BCA, None, "BATAK LETTER MANDAILING NA", 0x31, "Batak"),
    c(0x1BCB, None, "BATAK LETTER WA", 0x31, "Batak"),
    c(0x1BCC, None, "BATAK LETTER SIMALUNGUN WA", 0x31, "Batak"),
    c(0x1BCD, None, "BATAK LETTER PAKPAK WA", 0x31, "Batak"),
    c(0x1BCE, None, "BATAK LETTER GA", 0x31, "Batak"),
    c(0x1BCF, None, "BATAK LETTER SIMALUNGUN GA", 0x31, "Batak"),
    c(0x1BD0, None, "BATAK LETTER JA", 0x31, "Batak"),
    c(0x1BD1, None, "BATAK LETTER DA", 0x31, "Batak"),
    c(0x1BD2, None, "BATAK LETTER RA", 0x31, "Batak"),
    c(0x1BD3, None, "BATAK LETTER SIMALUNGUN RA", 0x31, "Batak"),
    c(0x1BD4, None, "BATAK LETTER MA", 0x31, "Batak"),
    c(0x1BD5, None, "BATAK LETTER SIMALUNGUN MA", 0x31, "Batak"),
    c(0x1BD6, None, "BATAK LETTER SOUTHERN TA", 0x31, "Batak"),
    c(0x1BD7, None, "BATAK LETTER NORTHERN TA", 0x31, "Batak"),
    c(0x1BD8, None, "BATAK LETTER SA", 0x31, "Batak"),
    c(0x1BD9, None, "BATAK LETTER SIMALUNGUN SA", 0x31, "Batak"),
    c(0x1BDA, None, "BATAK LETTER MANDAILING SA", 0x31, "Batak"),
    c(0x1BDB, None, "BATAK LETTER YA", 0x31, "Batak"),
    c(0x1BDC, None, "BATAK LETTER SIMALUNGUN YA", 0x31, "Batak"),
    c(0x1BDD, None, "BATAK LETTER NGA", 0x31, "Batak"),
    c(0x1BDE, None, "BATAK LETTER LA", 0x31, "Batak"),
    c(0x1BDF, None, "BATAK LETTER SIMALUNGUN LA", 0x31, "Batak"),
    c(0x1BE0, None, "BATAK LETTER NYA", 0x31, "Batak"),
    c(0x1BE1, None, "BATAK LETTER CA", 0x31, "Batak"),
    c(0x1BE2, None, "BATAK LETTER NDA", 0x31, "Batak"),
    c(0x1BE3, None, "BATAK LETTER MBA", 0x31, "Batak"),
    c(0x1BE4, None, "BATAK LETTER I", 0x31, "Batak"),
    c(0x1BE5, None, "BATAK LETTER U", 0x31, "Batak"),
    c(0x1BE6, None, "BATAK SIGN TOMPI", 0x20, "Batak"),
    c(0x1BE7, None, "BATAK VOWEL SIGN E", 0x21, "Batak"),
    c(0x1BE8, None, "BATAK VOWEL SIGN PAKPAK E", 0x21, "Batak"),
    c(0x1BE9, None, "BATAK VOWEL SIGN EE", 0x21, "Batak"),
    c(0x1BEA, None, "BATAK VOWEL SIGN I", 0x21, "Batak"),
    c(0x1BEB, None, "BATAK VOWEL SIGN KARO I", 0x21, "Batak"),
    c(0x1BEC, None, "BATAK VOWEL SIGN O", 0x21, "Batak"),
    c(0x1BED, None, "BATAK VOWEL SIGN KARO O", 0x21, "Batak"),
    c(0x1BEE, None, "BATAK VOWEL SIGN U", 0x21, "Batak"),
    c(0x1BEF, None, "BATAK VOWEL SIGN U FOR SIMALUNGUN SA", 0x21, "Batak"),
    c(0x1BF0, None, "BATAK CONSONANT SIGN NG", 0x21, "Batak"),
    c(0x1BF1, None, "BATAK CONSONANT SIGN H", 0x21, "Batak"),
    c(0x1BF2, None, "BATAK PANGOLAT", 0x20, "Batak"),
    c(0x1BF3, None, "BATAK PANONGONAN", 0x20, "Batak"),
    c(0x1BFC, None, "BATAK SYMBOL BINDU NA METEK", 0x00, "Batak"),
    c(0x1BFD, None, "BATAK SYMBOL BINDU PINARBORAS", 0x00, "Batak"),
    c(0x1BFE, None, "BATAK SYMBOL BINDU JUDUL", 0x00, "Batak"),
    c(0x1BFF, None, "BATAK SYMBOL BINDU PANGOLAT", 0x00, "Batak"),
    c(0x1C00, None, "LEPCHA LETTER KA", 0x31, "Lepcha"),
    c(0x1C01, None, "LEPCHA LETTER KLA", 0x31, "Lepcha"),
    c(0x1C02, None, "LEPCHA LETTER KHA", 0x31, "Lepcha"),
    c(0x1C03, None, "LEPCHA LETTER GA", 0x31, "Lepcha"),
    c(0x1C04, None, "LEPCHA LETTER GLA", 0x31, "Lepcha"),
    c(0x1C05, None, "LEPCHA LETTER NGA", 0x31, "Lepcha"),
    c(0x1C06, None, "LEPCHA LETTER CA", 0x31, "Lepcha"),
    c(0x1C07, None, "LEPCHA LETTER CHA", 0x31, "Lepcha"),
    c(0x1C08, None, "LEPCHA LETTER JA", 0x31, "Lepcha"),
    c(0x1C09, None, "LEPCHA LETTER NYA", 0x31, "Lepcha"),
    c(0x1C0A, None, "LEPCHA LETTER TA", 0x31, "Lepcha"),
    c(0x1C0B, None, "LEPCHA LETTER THA", 0x31, "Lepcha"),
    c(0x1C0C, None, "LEPCHA LETTER DA", 0x31, "Lepcha"),
    c(0x1C0D, None, "LEPCHA LETTER NA", 0x31, "Lepcha"),
    c(0x1C0E, None, "LEPCHA LETTER PA", 0x31, "Lepcha"),
    c(0x1C0F, None, "LEPCHA LETTER PLA", 0x31, "Lepcha"),
    c(0x1C10, None, "LEPCHA LETTER PHA", 0x31, "Lepcha"),
    c(0x1C11, None, "LEPCHA LETTER FA", 0x31, "Lepcha"),
    c(0x1C12, None, "LEPCHA LETTER FLA", 0x31, "Lepcha"),
    c(0x1C13, None, "LEPCHA LETTER BA", 0x31, "Lepcha"),
    c(0x1C14, None, "LEPCHA LETTER BLA", 0x31, "Lepcha"),
    c(0x1C15, None, "LEPCHA LETTER MA", 0x31, "Lepcha"),
    c(0x1C16, None, "LEPCHA LETTER MLA", 0x31, "Lepcha"),
    c(0x1C17, None, "LEPCHA LETTER TSA", 0x31, "Lepcha"),
    c(0x1C18, None, "LEPCHA LETTER TSHA", 0x31, "Lepcha"),
    c(0x1C19, None, "LEPCHA LETTER DZA", 0x31, "Lepcha"),
    c(0x1C1A, None, "LEPCHA LETTER YA", 0x31, "Lepcha"),
    c(0x1C1B, None, "LEPCHA LETTER RA", 0x31, "Lepcha"),
    c(0x1C1C, None, "LEPCHA LETTER LA", 0x31, "Lepcha"),
    c(0x1C1D, None, "LEPCHA LETTER HA", 0x31, "Lepcha"),
    c(0x1C1E, None, "LEPCHA LETTER HLA", 0x31, "Lepcha"),
    c(0x1C1F, None, "LEPCHA LETTER VA", 0x31, "Lepcha"),
    c(0x1C20, None, "LEPCHA LETTER SA", 0x31, "Lepcha"),
    c(0x1C21, None, "LEPCHA LETTER SHA", 0x31, "Lepcha"),
    c(0x1C22, None, "LEPCHA LETTER WA", 0x31, "Lepcha"),
    c(0x1C23, None, "LEPCHA LETTER A", 0x31, "Lepcha"),
    c(0x1C24, None, "LEPCHA SUBJOINED LETTER YA", 0x21, "Lepcha"),
    c(0x1C25, None, "LEPCHA SUBJOINED LETTER RA", 0x21, "Lepcha"),
    c(0x1C26, None, "LEPCHA VOWEL SIGN AA", 0x21, "Lepcha"),
    c(0x1C27, None, "LEPCHA VOWEL SIGN I", 0x21, "Lepcha"),
    c(0x1C28, None, "LEPCHA VOWEL SIGN O", 0x21, "Lepcha"),
    c(0x1C29, None, "LEPCHA VOWEL SIGN OO", 0x21, "Lepcha"),
    c(0x1C2A, None, "LEPCHA VOWEL SIGN U", 0x21, "Lepcha"),
    c(0x1C2B, None, "LEPCHA VOWEL SIGN UU", 0x21, "Lepcha"),
    c(0x1C2C, None, "LEPCHA VOWEL SIGN E", 0x21, "Lepcha"),
    c(0x1C2D, None, "LEPCHA CONSONANT SIGN K", 0x21, "Lepcha"),
    c(0x1C2E, None, "LEPCHA CONSONANT SIGN M", 0x21, "Lepcha"),
    c(0x1C2F, None, "LEPCHA CONSONANT SIGN L", 0x21, "Lepcha"),
    c(0x1C30, None, "LEPCHA CONSONANT SIGN N", 0x21, "Lepcha"),
    c(0x1C31, None, "LEPCHA CONSONANT SIGN P", 0x21, "Lepcha"),
    c(0x1C32, None, "LEPCHA CONSONANT SIGN R", 0x21, "Lepcha"),
    c(0x1C33, None, "LEPCHA CONSONANT SIGN T", 0x21, "Lepcha"),
    c(0x1C34, None, "LEPCHA CONSONANT SIGN NYIN-DO", 0x21, "Lepcha"),
    c(0x1C35, None, "LEPCHA CONSONANT SIGN KANG", 0x21, "Lepcha"),
    c(0x1C36, None, "LEPCHA SIGN RAN", 0x21, "Lepcha"),
    c(0x1C37, None, "LEPCHA SIGN NUKTA", 0x20, "Lepcha"),
    c(0x1C3B, None, "LEPCHA PUNCTUATION TA-ROL", 0x00, "Lepcha"),
    c(0x1C3C, None, "LEPCHA PUNCTUATION NYET THYOOM TA-ROL", 0x00, "Lepcha"),
    c(0x1C3D, None, "LEPCHA PUNCTUATION CER-WA", 0x00, "Lepcha"),
    c(0x1C3E, None, "LEPCHA PUNCTUATION TSHOOK CER-WA", 0x00, "Lepcha"),
    c(0x1C3F, None, "LEPCHA PUNCTUATION TSHOOK", 0x00, "Lepcha"),
    c(0x1C40, None, "LEPCHA DIGIT ZERO", 0x20, "Lepcha"),
    c(0x1C41, None, "LEPCHA DIGIT ONE", 0x20, "Lepcha"),
    c(0x1C42, None, "LEPCHA DIGIT TWO", 0x20, "Lepcha"),
    c(0x1C43, None, "LEPCHA DIGIT THREE", 0x20, "Lepcha"),
    c(0x1C44, None, "LEPCHA DIGIT FOUR", 0x20, "Lepcha"),
    c(0x1C45, None, "LEPCHA DIGIT FIVE", 0x20, "Lepcha"),
    c(0x1C46, None, "LEPCHA DIGIT SIX", 0x20, "Lepcha"),
    c(0x1C47, None, "LEPCHA DIGIT SEVEN", 0x20, "Lepcha"),
    c(0x1C48, None, "LEPCHA DIGIT EIGHT", 0x20, "Lepcha"),
    c(0x1C49, None, "LEPCHA DIGIT NINE", 0x20, "Lepcha"),
    c(0x1C4D, None, "LEPCHA LETTER TTA", 0x31, "Lepcha"),
    c(0x1C4E, None, "LEPCHA LETTER TTHA", 0x31, "Lepcha"),
    c(0x1C4F, None, "LEPCHA LETTER DDA", 0x31, "Lepcha"),
    c(0x1C50, None, "OL CHIKI DIGIT ZERO", 0x20, "Ol_Chiki"),
    c(0x1C51, None, "OL CHIKI DIGIT ONE", 0x20, "Ol_Chiki"),
    c(0x1C52, None, "OL CHIKI DIGIT TWO", 0x20, "Ol_Chiki"),
    c(0x1C53, None, "OL CHIKI DIGIT THREE", 0x20, "Ol_Chiki"),
    c(0x1C54, None, "OL CHIKI DIGIT FOUR", 0x20, "Ol_Chiki"),
    c(0x1C55, None, "OL CHIKI DIGIT FIVE", 0x20, "Ol_Chiki"),
    c(0x1C56, None, "OL CHIKI DIGIT SIX", 0x20, "Ol_Chiki"),
    c(0x1C57, None, "OL CHIKI DIGIT SEVEN", 0x20, "Ol_Chiki"),
    c(0x1C58, None, "OL CHIKI DIGIT EIGHT", 0x20, "Ol_Chiki"),
    c(0x1C59, None, "OL CHIKI DIGIT NINE", 0x20, "Ol_Chiki"),
    c(0x1C5A, None, "OL CHIKI LETTER LA", 0x31, "Ol_Chiki"),
    c(0x1C5B, None, "OL CHIKI LETTER AT", 0x31, "Ol_Chiki"),
    c(0x1C5C, None, "OL CHIKI LETTER AG", 0x31, "Ol_Chiki"),
    c(0x1C5D, None, "OL CHIKI LETTER ANG", 0x31, "Ol_Chiki"),
    c(0x1C5E, None, "OL CHIKI LETTER AL", 0x31, "Ol_Chiki"),
    c(0x1C5F, None, "OL CHIKI LETTER LAA", 0x31, "Ol_Chiki"),
    c(0x1C60, None, "OL CHIKI LETTER AAK", 0x31, "Ol_Chiki"),
    c(0x1C61, None, "OL CHIKI LETTER AAJ", 0x31, "Ol_Chiki"),
    c(0x1C62, None, "OL CHIKI LETTER AAM", 0x31, "Ol_Chiki"),
    c(0x1C63, None, "OL CHIKI LETTER AAW", 0x31, "Ol_Chiki"),
    c(0x1C64, None, "OL CHIKI LETTER LI", 0x31, "Ol_Chiki"),
    c(0x1C65, None, "OL CHIKI LETTER IS", 0x31, "Ol_Chiki"),
    c(0x1C66, None, "OL CHIKI LETTER IH", 0x31, "Ol_Chiki"),
    c(0x1C67, None, "OL CHIKI LETTER INY", 0x31, "Ol_Chiki"),
    c(0x1C68, None, "OL CHIKI LETTER IR", 0x31, "Ol_Chiki"),
    c(0x1C69, None, "OL CHIKI LETTER LU", 0x31, "Ol_Chiki"),
    c(0x1C6A, None, "OL CHIKI LETTER UC", 0x31, "Ol_Chiki"),
    c(0x1C6B, None, "OL CHIKI LETTER UD", 0x31, "Ol_Chiki"),
    c(0x1C6C, None, "OL CHIKI LETTER UNN", 0x31, "Ol_Chiki"),
    c(0x1C6D, None, "OL CHIKI LETTER UY", 0x31, "Ol_Chiki"),
    c(0x1C6E, None, "OL CHIKI LETTER LE", 0x31, "Ol_Chiki"),
    c(0x1C6F, None, "OL CHIKI LETTER EP", 0x31, "Ol_Chiki"),
    c(0x1C70, None, "OL CHIKI LETTER EDD", 0x31, "Ol_Chiki"),
    c(0x1C71, None, "OL CHIKI LETTER EN", 0x31, "Ol_Chiki"),
    c(0x1C72, None, "OL CHIKI LETTER ERR", 0x31, "Ol_Chiki"),
    c(0x1C73, None, "OL CHIKI LETTER LO", 0x31, "Ol_Chiki"),
    c(0x1C74, None, "OL CHIKI LETTER OTT", 0x31, "Ol_Chiki"),
    c(0x1C75, None, "OL CHIKI LETTER OB", 0x31, "Ol_Chiki"),
    c(0x1C76, None, "OL CHIKI LETTER OV", 0x31, "Ol_Chiki"),
    c(0x1C77, None, "OL CHIKI LETTER OH", 0x31, "Ol_Chiki"),
    c(0x1C78, None, "OL CHIKI MU TTUDDAG", 0x31, "Ol_Chiki"),
    c(0x1C79, None, "OL CHIKI GAAHLAA TTUDDAAG", 0x31, "Ol_Chiki"),
    c(0x1C7A, None, "OL CHIKI MU-GAAHLAA TTUDDAAG", 0x31, "Ol_Chiki"),
    c(0x1C7B, None, "OL CHIKI RELAA", 0x31, "Ol_Chiki"),
    c(0x1C7C, None, "OL CHIKI PHAARKAA", 0x31, "Ol_Chiki"),
    c(0x1C7D, None, "OL CHIKI AHAD", 0x31, "Ol_Chiki"),
    c(0x1C7E, None, "OL CHIKI PUNCTUATION MUCAAD", 0x00, "Ol_Chiki"),
    c(0x1C7F, None, "OL CHIKI PUNCTUATION DOUBLE MUCAAD", 0x00, "Ol_Chiki"),
    c(0x1C80, None, "CYRILLIC SMALL LETTER ROUNDED VE", 0x31, "Cyrillic_Ext_C"),
    c(0x1C81, None, "CYRILLIC SMALL LETTER LONG-LEGGED DE", 0x31, "Cyrillic_Ext_C"),
    c(0x1C82, None, "CYRILLIC SMALL LETTER NARROW O", 0x31, "Cyrillic_Ext_C"),
    c(0x1C83, None, "CYRILLIC SMALL LETTER WIDE ES", 0x31, "Cyrillic_Ext_C"),
    c(0x1C84, None, "CYRILLIC SMALL LETTER TALL TE", 0x31, "Cyrillic_Ext_C"),
    c(0x1C85, None, "CYRILLIC SMALL LETTER THREE-LEGGED TE", 0x31, "Cyrillic_Ext_C"),
    c(0x1C86, None, "CYRILLIC SMALL LETTER TALL HARD SIGN", 0x31, "Cyrillic_Ext_C"),
    c(0x1C87, None, "CYRILLIC SMALL LETTER TALL YAT", 0x31, "Cyrillic_Ext_C"),
    c(0x1C88, None, "CYRILLIC SMALL LETTER UNBLENDED UK", 0x31, "Cyrillic_Ext_C"),
    c(0x1C90, None, "GEORGIAN MTAVRULI CAPITAL LETTER AN", 0x31, "Georgian_Ext"),
    c(0x1C91, None, "GEORGIAN MTAVRULI CAPITAL LETTER BAN", 0x31, "Georgian_Ext"),
    c(0x1C92, None, "GEORGIAN MTAVRULI CAPITAL LETTER GAN", 0x31, "Georgian_Ext"),
    c(0x1C93, None, "GEORGIAN MTAVRULI CAPITAL LETTER DON", 0x31, "Georgian_Ext"),
    c(0x1C94, None, "GEORGIAN MTAVRULI CAPITAL LETTER EN", 0x31, "Georgian_Ext"),
    c(0x1C95, None, "GEORGIAN MTAVRULI CAPITAL LETTER VIN", 0x31, "Georgian_Ext"),
    c(0x1C96, None, "GEORGIAN MTAVRULI CAPITAL LETTER ZEN", 0x31, "Georgian_Ext"),
    c(0x1C97, None, "GEORGIAN MTAVRULI CAPITAL LETTER TAN", 0x31, "Georgian_Ext"),
    c(0x1C98, None, "GEORGIAN MTAVRULI CAPITAL LETTER IN", 0x31, "Georgian_Ext"),
    c(0x1C99, None, "GEORGIAN MTAVRULI CAPITAL LETTER KAN", 0x31, "Georgian_Ext"),
    c(0x1C9A, None, "GEORGIAN MTAVRULI CAPITAL LETTER LAS", 0x31, "Georgian_Ext"),
    c(0x1C9B, None, "GEORGIAN MTAVRULI CAPITAL LETTER MAN", 0x31, "Georgian_Ext"),
    c(0x1C9C, None, "GEORGIAN MTAVRULI CAPITAL LETTER NAR", 0x31, "Georgian_Ext"),
    c(0x1C9D, None, "GEORGIAN MTAVRULI CAPITAL LETTER ON", 0x31, "Georgian_Ext"),
    c(0x1C9E, None, "GEORGIAN MTAVRULI CAPITAL LETTER PAR", 0x31, "Georgian_Ext"),
    c(0x1C9F, None, "GEORGIAN MTAVRULI CAPITAL LETTER ZHAR", 0x31, "Georgian_Ext"),
    c(0x1CA0, None, "GEORGIAN MTAVRULI CAPITAL LETTER RAE", 0x31, "Georgian_Ext"),
    c(0x1CA1, None, "GEORGIAN MTAVRULI CAPITAL LETTER SAN", 0x31, "Georgian_Ext"),
    c(0x1CA2, None, "GEORGIAN MTAVRULI CAPITAL LETTER TAR", 0x31, "Georgian_Ext"),
    c(0x1CA3, None, "GEORGIAN MTAVRULI CAPITAL LETTER UN", 0x31, "Georgian_Ext"),
    c(0x1CA4, None, "GEORGIAN MTAVRULI CAPITAL LETTER PHAR", 0x31, "Georgian_Ext"),
    c(0x1CA5, None, "GEORGIAN MTAVRULI CAPITAL LETTER KHAR", 0x31, "Georgian_Ext"),
    c(0x1CA6, None, "GEORGIAN MTAVRULI CAPITAL LETTER GHAN", 0x31, "Georgian_Ext"),
    c(0x1CA7, None, "GEORGIAN MTAVRULI CAPITAL LETTER QAR", 0x31, "Georgian_Ext"),
    c(0x1CA8, None, "GEORGIAN MTAVRULI CAPITAL LETTER SHIN", 0x31, "Georgian_Ext"),
    c(0x1CA9, None, "GEORGIAN MTAVRULI CAPITAL LETTER CHIN", 0x31, "Georgian_Ext"),
    c(0x1CAA, None, "GEORGIAN MTAVRULI CAPITAL LETTER CAN", 0x31, "Georgian_Ext"),
    c(0x1CAB, None, "GEORGIAN MTAVRULI CAPITAL LETTER JIL", 0x31, "Georgian_Ext"),
    c(0x1CAC, None, "GEORGIAN MTAVRULI CAPITAL LETTER CIL", 0x31, "Georgian_Ext"),
    c(0x1CAD, None, "GEORGIAN MTAVRULI CAPITAL LETTER CHAR", 0x31, "Georgian_Ext"),
    c(0x1CAE, None, "GEORGIAN MTAVRULI CAPITAL LETTER XAN", 0x31, "Georgian_Ext"),
    c(0x1CAF, None, "GEORGIAN MTAVRULI CAPITAL LETTER JHAN", 0x31, "Georgian_Ext"),
    c(0x1CB0, None, "GEORGIAN MTAVRULI CAPITAL LETTER HAE", 0x31, "Georgian_Ext"),
    c(0x1CB1, None, "GEORGIAN MTAVRULI CAPITAL LETTER HE", 0x31, "Georgian_Ext"),
    c(0x1CB2, None, "GEORGIAN MTAVRULI CAPITAL LETTER HIE", 0x31, "Georgian_Ext"),
    c(0x1CB3, None, "GEORGIAN MTAVRULI CAPITAL LETTER WE", 0x31, "Georgian_Ext"),
    c(0x1CB4, None, "GEORGIAN MTAVRULI CAPITAL LETTER HAR", 0x31, "Georgian_Ext"),
    c(0x1CB5, None, "GEORGIAN MTAVRULI CAPITAL LETTER HOE", 0x31, "Georgian_Ext"),
    c(0x1CB6, None, "GEORGIAN MTAVRULI CAPITAL LETTER FI", 0x31, "Georgian_Ext"),
    c(0x1CB7, None, "GEORGIAN MTAVRULI CAPITAL LETTER YN", 0x31, "Georgian_Ext"),
    c(0x1CB8, None, "GEORGIAN MTAVRULI CAPITAL LETTER ELIFI", 0x31, "Georgian_Ext"),
    c(0x1CB9, None, "GEORGIAN MTAVRULI CAPITAL LETTER TURNED GAN", 0x31, "Georgian_Ext"),
    c(0x1CBA, None, "GEORGIAN MTAVRULI CAPITAL LETTER AIN", 0x31, "Georgian_Ext"),
    c(0x1CBD, None, "GEORGIAN MTAVRULI CAPITAL LETTER AEN", 0x31, "Georgian_Ext"),
    c(0x1CBE, None, "GEORGIAN MTAVRULI CAPITAL LETTER HARD SIGN", 0x31, "Georgian_Ext"),
    c(0x1CBF, None, "GEORGIAN MTAVRULI CAPITAL LETTER LABIAL SIGN", 0x31, "Georgian_Ext"),
    c(0x1CC0, None, "SUNDANESE PUNCTUATION BINDU SURYA", 0x00, "Sundanese_Sup"),
    c(0x1CC1, None, "SUNDANESE PUNCTUATION BINDU PANGLONG", 0x00, "Sundanese_Sup"),
    c(0x1CC2, None, "SUNDANESE PUNCTUATION BINDU PURNAMA", 0x00, "Sundanese_Sup"),
    c(0x1CC3, None, "SUNDANESE PUNCTUATION BINDU CAKRA", 0x00, "Sundanese_Sup"),
    c(0x1CC4, None, "SUNDANESE PUNCTUATION BINDU LEU SATANGA", 0x00, "Sundanese_Sup"),
    c(0x1CC5, None, "SUNDANESE PUNCTUATION BINDU KA SATANGA", 0x00, "Sundanese_Sup"),
    c(0x1CC6, None, "SUNDANESE PUNCTUATION BINDU DA SATANGA", 0x00, "Sundanese_Sup"),
    c(0x1CC7, None, "SUNDANESE PUNCTUATION BINDU BA SATANGA", 0x00, "Sundanese_Sup"),
    c(0x1CD0, None, "VEDIC TONE KARSHANA", 0x20, "Vedic_Ext"),
    c(0x1CD1, None, "VEDIC TONE SHARA", 0x20, "Vedic_Ext"),
    c(0x1CD2, None, "VEDIC TONE PRENKHA", 0x20, "Vedic_Ext"),
    c(0x1CD3, None, "VEDIC SIGN NIHSHVASA", 0x00, "Vedic_Ext"),
    c(0x1CD4, None, "VEDIC SIGN YAJURVEDIC MIDLINE SVARITA", 0x20, "Vedic_Ext"),
    c(0x1CD5, None, "VEDIC TONE YAJURVEDIC AGGRAVATED INDEPENDENT SVARITA", 0x20, "Vedic_Ext"),
    c(0x1CD6, None, "VEDIC TONE YAJURVEDIC INDEPENDENT SVARITA", 0x20, "Vedic_Ext"),
    c(0x1CD7, None, "VEDIC TONE YAJURVEDIC KATHAKA INDEPENDENT SVARITA", 0x20, "Vedic_Ext"),
    c(0x1CD8, None, "VEDIC TONE CANDRA BELOW", 0x20, "Vedic_Ext"),
    c(0x1CD9, None, "VEDIC TONE YAJURVEDIC KATHAKA INDEPENDENT SVARITA SCHROEDER", 0x20, "Vedic_Ext"),
    c(0x1CDA, None, "VEDIC TONE DOUBLE SVARITA", 0x20, "Vedic_Ext"),
    c(0x1CDB, None, "VEDIC TONE TRIPLE SVARITA", 0x20, "Vedic_Ext"),
    c(0x1CDC, None, "VEDIC TONE KATHAKA ANUDATTA", 0x20, "Vedic_Ext"),
    c(0x1CDD, None, "VEDIC TONE DOT BELOW", 0x20, "Vedic_Ext"),
    c(0x1CDE, None, "VEDIC TONE TWO DOTS BELOW", 0x20, "Vedic_Ext"),
    c(0x1CDF, None, "VEDIC TONE THREE DOTS BELOW", 0x20, "Vedic_Ext"),
    c(0x1CE0, None, "VEDIC TONE RIGVEDIC KASHMIRI INDEPENDENT SVARITA", 0x20, "Vedic_Ext"),
    c(0x1CE1, None, "VEDIC TONE ATHARVAVEDIC INDEPENDENT SVARITA", 0x20, "Vedic_Ext"),
    c(0x1CE2, None, "VEDIC SIGN VISARGA SVARITA", 0x20, "Vedic_Ext"),
    c(0x1CE3, None, "VEDIC SIGN VISARGA UDATTA", 0x20, "Vedic_Ext"),
    c(0x1CE4, None, "VEDIC SIGN REVERSED VISARGA UDATTA", 0x20, "Vedic_Ext"),
    c(0x1CE5, None, "VEDIC SIGN VISARGA ANUDATTA", 0x20, "Vedic_Ext"),
    c(0x1CE6, None, "VEDIC SIGN REVERSED VISARGA ANUDATTA", 0x20, "Vedic_Ext"),
    c(0x1CE7, None, "VEDIC SIGN VISARGA UDATTA WITH TAIL", 0x20, "Vedic_Ext"),
    c(0x1CE8, None, "VEDIC SIGN VISARGA ANUDATTA WITH TAIL", 0x20, "Vedic_Ext"),
    c(0x1CE9, None, "VEDIC SIGN ANUSVARA ANTARGOMUKHA", 0x31, "Vedic_Ext"),
    c(0x1CEA, None, "VEDIC SIGN ANUSVARA BAHIRGOMUKHA", 0x31, "Vedic_Ext"),
    c(0x1CEB, None, "VEDIC SIGN ANUSVARA VAMAGOMUKHA", 0x31, "Vedic_Ext"),
    c(0x1CEC, None, "VEDIC SIGN ANUSVARA VAMAGOMUKHA WITH TAIL", 0x31, "Vedic_Ext"),
    c(0x1CED, None, "VEDIC SIGN TIRYAK", 0x20, "Vedic_Ext"),
    c(0x1CEE, None, "VEDIC SIGN HEXIFORM LONG ANUSVARA", 0x31, "Vedic_Ext"),
    c(0x1CEF, None, "VEDIC SIGN LONG ANUSVARA", 0x31, "Vedic_Ext"),
    c(0x1CF0, None, "VEDIC SIGN RTHANG LONG ANUSVARA", 0x31, "Vedic_Ext"),
    c(0x1CF1, None, "VEDIC SIGN ANUSVARA UBHAYATO MUKHA", 0x31, "Vedic_Ext"),
    c(0x1CF2, None, "VEDIC SIGN ARDHAVISARGA", 0x31, "Vedic_Ext"),
    c(0x1CF3, None, "VEDIC SIGN ROTATED ARDHAVISARGA", 0x31, "Vedic_Ext"),
    c(0x1CF4, None, "VEDIC TONE CANDRA ABOVE", 0x20, "Vedic_Ext"),
    c(0x1CF5, None, "VEDIC SIGN JIHVAMULIYA", 0x31, "Vedic_Ext"),
    c(0x1CF6, None, "VEDIC SIGN UPADHMANIYA", 0x31, "Vedic_Ext"),
    c(0x1CF7, None, "VEDIC SIGN ATIKRAMA", 0x20, "Vedic_Ext"),
    c(0x1CF8, None, "VEDIC TONE RING ABOVE", 0x20, "Vedic_Ext"),
    c(0x1CF9, None, "VEDIC TONE DOUBLE RING ABOVE", 0x20, "Vedic_Ext"),
    c(0x1CFA, None, "VEDIC SIGN DOUBLE ANUSVARA ANTARGOMUKHA", 0x31, "Vedic_Ext"),
    c(0x1D00, None, "LATIN LETTER SMALL CAPITAL A", 0x31, "Phonetic_Ext"),
    c(0x1D01, None, "LATIN LETTER SMALL CAPITAL AE", 0x31, "Phonetic_Ext"),
    c(0x1D02, None, "LATIN SMALL LETTER TURNED AE", 0x31, "Phonetic_Ext"),
    c(0x1D03, None, "LATIN LETTER SMALL CAPITAL BARRED B", 0x31, "Phonetic_Ext"),
    c(0x1D04, None, "LATIN LETTER SMALL CAPITAL C", 0x31, "Phonetic_Ext"),
    c(0x1D05, None, "LATIN LETTER SMALL CAPITAL D", 0x31, "Phonetic_Ext"),
    c(0x1D06, None, "LATIN LETTER SMALL CAPITAL ETH", 0x31, "Phonetic_Ext"),
    c(0x1D07, None, "LATIN LETTER SMALL CAPITAL E", 0x31, "Phonetic_Ext"),
    c(0x1D08, None, "LATIN SMALL LETTER TURNED OPEN E", 0x31, "Phonetic_Ext"),
    c(0x1D09, None, "LATIN SMALL LETTER TURNED I", 0x31, "Phonetic_Ext"),
    c(0x1D0A, None, "LATIN LETTER SMALL CAPITAL J", 0x31, "Phonetic_Ext"),
    c(0x1D0B, None, "LATIN LETTER SMALL CAPITAL K", 0x31, "Phonetic_Ext"),
    c(0x1D0C, None, "LATIN LETTER SMALL CAPITAL L WITH STROKE", 0x31, "Phonetic_Ext"),
    c(0x1D0D, None, "LATIN LETTER SMALL CAPITAL M", 0x31, "Phonetic_Ext"),
    c(0x1D0E, None, "LATIN LETTER SMALL CAPITAL REVERSED N", 0x31, "Phonetic_Ext"),
    c(0x1D0F, None, "LATIN LETTER SMALL CAPITAL O", 0x31, "Phonetic_Ext"),
    c(0x1D10, None, "LATIN LETTER SMALL CAPITAL OPEN O", 0x31, "Phonetic_Ext"),
    c(0x1D11, None, "LATIN SMALL LETTER SIDEWAYS O", 0x31, "Phonetic_Ext"),
    c(0x1D12, None, "LATIN SMALL LETTER SIDEWAYS OPEN O", 0x31, "Phonetic_Ext"),
    c(0x1D13, None, "LATIN SMALL LETTER SIDEWAYS O WITH STROKE", 0x31, "Phonetic_Ext"),
    c(0x1D14, None, "LATIN SMALL LETTER TURNED OE", 0x31, "Phonetic_Ext"),
    c(0x1D15, None, "LATIN LETTER SMALL CAPITAL OU", 0x31, "Phonetic_Ext"),
    c(0x1D16, None, "LATIN SMALL LETTER TOP HALF O", 0x31, "Phonetic_Ext"),
    c(0x1D17, None, "LATIN SMALL LETTER BOTTOM HALF O", 0x31, "Phonetic_Ext"),
    c(0x1D18, None, "LATIN LETTER SMALL CAPITAL P", 0x31, "Phonetic_Ext"),
    c(0x1D19, None, "LATIN LETTER SMALL CAPITAL REVERSED R", 0x31, "Phonetic_Ext"),
    c(0x1D1A, None, "LATIN LETTER SMALL CAPITAL TURNED R", 0x31, "Phonetic_Ext"),
    c(0x1D1B, None, "LATIN LETTER SMALL CAPITAL T", 0x31, "Phonetic_Ext"),
    c(0x1D1C, None, "LATIN LETTER SMALL CAPITAL U", 0x31, "Phonetic_Ext"),
    c(0x1D1D, None, "LATIN SMALL LETTER SIDEWAYS U", 0x31, "Phonetic_Ext"),
    c(0x1D1E, None, "LATIN SMALL LETTER SIDEWAYS DIAERESIZED U", 0x31, "Phonetic_Ext"),
    c(0x1D1F, None, "LATIN SMALL LETTER SIDEWAYS TURNED M", 0x31, "Phonetic_Ext"),
    c(0x1D20, None, "LATIN LETTER SMALL CAPITAL V", 0x31, "Phonetic_Ext"),
    c(0x1D21, None, "LATIN LETTER SMALL CAPITAL W", 0x31, "Phonetic_Ext"),
    c(0x1D22, None, "LATIN LETTER SMALL CAPITAL Z", 0x31, "Phonetic_Ext"),
    c(0x1D23, None, "LATIN LETTER SMALL CAPITAL EZH", 0x31, "Phonetic_Ext"),
    c(0x1D24, None, "LATIN LETTER VOICED LARYNGEAL SPIRANT", 0x31, "Phonetic_Ext"),
    c(0x1D25, None, "LATIN LETTER AIN", 0x31, "Phonetic_Ext"),
    c(0x1D26, None, "GREEK LETTER SMALL CAPITAL GAMMA", 0x31, "Phonetic_Ext"),
    c(0x1D27, None, "GREEK LETTER SMALL CAPITAL LAMDA", 0x31, "Phonetic_Ext"),
    c(0x1D28, None, "GREEK LETTER SMALL CAPITAL PI", 0x31, "Phonetic_Ext"),
    c(0x1D29, None, "GREEK LETTER SMALL CAPITAL RHO", 0x31, "Phonetic_Ext"),
    c(0x1D2A, None, "GREEK LETTER SMALL CAPITAL PSI", 0x31, "Phonetic_Ext"),
    c(0x1D2B, None, "CYRILLIC LETTER SMALL CAPITAL EL", 0x31, "Phonetic_Ext"),
    c(0x1D2C, None, "MODIFIER LETTER CAPITAL A", 0x31, "Phonetic_Ext"),
    c(0x1D2D, None, "MODIFIER LETTER CAPITAL AE", 0x31, "Phonetic_Ext"),
    c(0x1D2E, None, "MODIFIER LETTER CAPITAL B", 0x31, "Phonetic_Ext"),
    c(0x1D2F, None, "MODIFIER LETTER CAPITAL BARRED B", 0x31, "Phonetic_Ext"),
    c(0x1D30, None, "MODIFIER LETTER CAPITAL D", 0x31, "Phonetic_Ext"),
    c(0x1D31, None, "MODIFIER LETTER CAPITAL E", 0x31, "Phonetic_Ext"),
    c(0x1D32, None, "MODIFIER LETTER CAPITAL REVERSED E", 0x31, "Phonetic_Ext"),
    c(0x1D33, None, "MODIFIER LETTER CAPITAL G", 0x31, "Phonetic_Ext"),
    c(0x1D34, None, "MODIFIER LETTER CAPITAL H", 0x31, "Phonetic_Ext"),
    c(0x1D35, None, "MODIFIER LETTER CAPITAL I", 0x31, "Phonetic_Ext"),
    c(0x1D36, None, "MODIFIER LETTER CAPITAL J", 0x31, "Phonetic_Ext"),
    c(0x1D37, None, "MODIFIER LETTER CAPITAL K", 0x31, "Phonetic_Ext"),
    c(0x1D38, None, "MODIFIER LETTER CAPITAL L", 0x31, "Phonetic_Ext"),
    c(0x1D39, None, "MODIFIER LETTER CAPITAL M", 0x31, "Phonetic_Ext"),
    c(0x1D3A, None, "MODIFIER LETTER CAPITAL N", 0x31, "Phonetic_Ext"),
    c(0x1D3B, None, "MODIFIER LETTER CAPITAL REVERSED N", 0x31, "Phonetic_Ext"),
    c(0x1D3C, None, "MODIFIER LETTER CAPITAL O", 0x31, "Phonetic_Ext"),
    c(0x1D3D, None, "MODIFIER LETTER CAPITAL OU", 0x31, "Phonetic_Ext"),
    c(0x1D3E, None, "MODIFIER LETTER CAPITAL P", 0x31, "Phonetic_Ext"),
    c(0x1D3F, None, "MODIFIER LETTER CAPITAL R", 0x31, "Phonetic_Ext"),
    c(0x1D40, None, "MODIFIER LETTER CAPITAL T", 0x31, "Phonetic_Ext"),
    c(0x1D41, None, "MODIFIER LETTER CAPITAL U", 0x31, "Phonetic_Ext"),
    c(0x1D42, None, "MODIFIER LETTER CAPITAL W", 0x31, "Phonetic_Ext"),
    c(0x1D43, None, "MODIFIER LETTER SMALL A", 0x31, "Phonetic_Ext"),
    c(0x1D44, None, "MODIFIER LETTER SMALL TURNED A", 0x31, "Phonetic_Ext"),
    c(0x1D45, None, "MODIFIER LETTER SMALL ALPHA", 0x31, "Phonetic_Ext"),
    c(0x1D46, None, "MODIFIER LETTER SMALL TURNED AE", 0x31, "Phonetic_Ext"),
    c(0x1D47, None, "MODIFIER LETTER SMALL B", 0x31, "Phonetic_Ext"),
    c(0x1D48, None, "MODIFIER LETTER SMALL D", 0x31, "Phonetic_Ext"),
    c(0x1D49, None, "MODIFIER LETTER SMALL E", 0x31, "Phonetic_Ext"),
    c(0x1D4A, None, "MODIFIER LETTER SMALL SCHWA", 0x31, "Phonetic_Ext"),
    c(0x1D4B, None, "MODIFIER LETTER SMALL OPEN E", 0x31, "Phonetic_Ext"),
    c(0x1D4C, None, "MODIFIER LETTER SMALL TURNED OPEN E", 0x31, "Phonetic_Ext"),
    c(0x1D4D, None, "MODIFIER LETTER SMALL G", 0x31, "Phonetic_Ext"),
    c(0x1D4E, None, "MODIFIER LETTER SMALL TURNED I", 0x31, "Phonetic_Ext"),
    c(0x1D4F, None, "MODIFIER LETTER SMALL K", 0x31, "Phonetic_Ext"),
    c(0x1D50, None, "MODIFIER LETTER SMALL M", 0x31, "Phonetic_Ext"),
    c(0x1D51, None, "MODIFIER LETTER SMALL ENG", 0x31, "Phonetic_Ext"),
    c(0x1D52, None, "MODIFIER LETTER SMALL O", 0x31, "Phonetic_Ext"),
    c(0x1D53, None, "MODIFIER LETTER SMALL OPEN O", 0x31, "Phonetic_Ext"),
    c(0x1D54, None, "MODIFIER LETTER SMALL TOP HALF O", 0x31, "Phonetic_Ext"),
    c(0x1D55, None, "MODIFIER LETTER SMALL BOTTOM HALF O", 0x31, "Phonetic_Ext"),
    c(0x1D56, None, "MODIFIER LETTER SMALL P", 0x31, "Phonetic_Ext"),
    c(0x1D57, None, "MODIFIER LETTER SMALL T", 0x31, "Phonetic_Ext"),
    c(0x1D58, None, "MODIFIER LETTER SMALL U", 0x31, "Phonetic_Ext"),
    c(0x1D59, None, "MODIFIER LETTER SMALL SIDEWAYS U", 0x31, "Phonetic_Ext"),
    c(0x1D5A, None, "MODIFIER LETTER SMALL TURNED M", 0x31, "Phonetic_Ext"),
    c(0x1D5B, None, "MODIFIER LETTER SMALL V", 0x31, "Phonetic_Ext"),
    c(0x1D5C, None, "MODIFIER LETTER SMALL AIN", 0x31, "Phonetic_Ext"),
    c(0x1D5D, None, "MODIFIER LETTER SMALL BETA", 0x31, "Phonetic_Ext"),
    c(0x1D5E, None, "MODIFIER LETTER SMALL GREEK GAMMA", 0x31, "Phonetic_Ext"),
    c(0x1D5F, None, "MODIFIER LETTER SMALL DELTA", 0x31, "Phonetic_Ext"),
    c(0x1D60, None, "MODIFIER LETTER SMALL GREEK PHI", 0x31, "Phonetic_Ext"),
    c(0x1D61, None, "MODIFIER LETTER SMALL CHI", 0x31, "Phonetic_Ext"),
    c(0x1D62, None, "LATIN SUBSCRIPT SMALL LETTER I", 0x31, "Phonetic_Ext"),
    c(0x1D63, None, "LATIN SUBSCRIPT SMALL LETTER R", 0x31, "Phonetic_Ext"),
    c(0x1D64, None, "LATIN SUBSCRIPT SMALL LETTER U", 0x31, "Phonetic_Ext"),
    c(0x1D65, None, "LATIN SUBSCRIPT SMALL LETTER V", 0x31, "Phonetic_Ext"),
    c(0x1D66, None, "GREEK SUBSCRIPT SMALL LETTER BETA", 0x31, "Phonetic_Ext"),
    c(0x1D67, None, "GREEK SUBSCRIPT SMALL LETTER GAMMA", 0x31, "Phonetic_Ext"),
    c(0x1D68, None, "GREEK SUBSCRIPT SMALL LETTER RHO", 0x31, "Phonetic_Ext"),
    c(0x1D69, None, "GREEK SUBSCRIPT SMALL LETTER PHI", 0x31, "Phonetic_Ext"),
    c(0x1D6A, None, "GREEK SUBSCRIPT SMALL LETTER CHI", 0x31, "Phonetic_Ext"),
    c(0x1D6B, None, "LATIN SMALL LETTER UE", 0x31, "Phonetic_Ext"),
    c(0x1D6C, None, "LATIN SMALL LETTER B WITH MIDDLE TILDE", 0x31, "Phonetic_Ext"),
    c(0x1D6D, None, "LATIN SMALL LETTER D WITH MIDDLE TILDE", 0x31, "Phonetic_Ext"),
    c(0x1D6E, None, "LATIN SMALL LETTER F WITH MIDDLE TILDE", 0x31, "Phonetic_Ext"),
    c(0x1D6F, None, "LATIN SMALL LETTER M WITH MIDDLE TILDE", 0x31, "Phonetic_Ext"),
    c(0x1D70, None, "LATIN SMALL LETTER N WITH MIDDLE TILDE", 0x31, "Phonetic_Ext"),
    c(0x1D71, None, "LATIN SMALL LETTER P WITH MIDDLE TILDE", 0x31, "Phonetic_Ext"),
    c(0x1D72, None, "LATIN SMALL LETTER R WITH MIDDLE TILDE", 0x31, "Phonetic_Ext"),
    c(0x1D73, None, "LATIN SMALL LETTER R WITH FISHHOOK AND MIDDLE TILDE", 0x31, "Phonetic_Ext"),
    c(0x1D74, None, "LATIN SMALL LETTER S WITH MIDDLE TILDE", 0x31, "Phonetic_Ext"),
    c(0x1D75, None, "LATIN SMALL LETTER T WITH MIDDLE TILDE", 0x31, "Phonetic_Ext"),
    c(0x1D76, None, "LATIN SMALL LETTER Z WITH MIDDLE TILDE", 0x31, "Phonetic_Ext"),
    c(0x1D77, None, "LATIN SMALL LETTER TURNED G", 0x31, "Phonetic_Ext"),
    c(0x1D78, None, "MODIFIER LETTER CYRILLIC EN", 0x31, "Phonetic_Ext"),
    c(0x1D79, None, "LATIN SMALL LETTER INSULAR G", 0x31, "Phonetic_Ext"),
    c(0x1D7A, None, "LATIN SMALL LETTER TH WITH STRIKETHROUGH", 0x31, "Phonetic_Ext"),
    c(0x1D7B, None, "LATIN SMALL CAPITAL LETTER I WITH STROKE", 0x31, "Phonetic_Ext"),
    c(0x1D7C, None, "LATIN SMALL LETTER IOTA WITH STROKE", 0x31, "Phonetic_Ext"),
    c(0x1D7D, None, "LATIN SMALL LETTER P WITH STROKE", 0x31, "Phonetic_Ext"),
    c(0x1D7E, None, "LATIN SMALL CAPITAL LETTER U WITH STROKE", 0x31, "Phonetic_Ext"),
    c(0x1D7F, None, "LATIN SMALL LETTER UPSILON WITH STROKE", 0x31, "Phonetic_Ext"),
    c(0x1D80, None, "LATIN SMALL LETTER B WITH PALATAL HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D81, None, "LATIN SMALL LETTER D WITH PALATAL HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D82, None, "LATIN SMALL LETTER F WITH PALATAL HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D83, None, "LATIN SMALL LETTER G WITH PALATAL HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D84, None, "LATIN SMALL LETTER K WITH PALATAL HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D85, None, "LATIN SMALL LETTER L WITH PALATAL HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D86, None, "LATIN SMALL LETTER M WITH PALATAL HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D87, None, "LATIN SMALL LETTER N WITH PALATAL HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D88, None, "LATIN SMALL LETTER P WITH PALATAL HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D89, None, "LATIN SMALL LETTER R WITH PALATAL HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D8A, None, "LATIN SMALL LETTER S WITH PALATAL HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D8B, None, "LATIN SMALL LETTER ESH WITH PALATAL HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D8C, None, "LATIN SMALL LETTER V WITH PALATAL HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D8D, None, "LATIN SMALL LETTER X WITH PALATAL HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D8E, None, "LATIN SMALL LETTER Z WITH PALATAL HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D8F, None, "LATIN SMALL LETTER A WITH RETROFLEX HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D90, None, "LATIN SMALL LETTER ALPHA WITH RETROFLEX HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D91, None, "LATIN SMALL LETTER D WITH HOOK AND TAIL", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D92, None, "LATIN SMALL LETTER E WITH RETROFLEX HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D93, None, "LATIN SMALL LETTER OPEN E WITH RETROFLEX HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D94, None, "LATIN SMALL LETTER REVERSED OPEN E WITH RETROFLEX HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D95, None, "LATIN SMALL LETTER SCHWA WITH RETROFLEX HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D96, None, "LATIN SMALL LETTER I WITH RETROFLEX HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D97, None, "LATIN SMALL LETTER OPEN O WITH RETROFLEX HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D98, None, "LATIN SMALL LETTER ESH WITH RETROFLEX HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D99, None, "LATIN SMALL LETTER U WITH RETROFLEX HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D9A, None, "LATIN SMALL LETTER EZH WITH RETROFLEX HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D9B, None, "MODIFIER LETTER SMALL TURNED ALPHA", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D9C, None, "MODIFIER LETTER SMALL C", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D9D, None, "MODIFIER LETTER SMALL C WITH CURL", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D9E, None, "MODIFIER LETTER SMALL ETH", 0x31, "Phonetic_Ext_Sup"),
    c(0x1D9F, None, "MODIFIER LETTER SMALL REVERSED OPEN E", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DA0, None, "MODIFIER LETTER SMALL F", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DA1, None, "MODIFIER LETTER SMALL DOTLESS J WITH STROKE", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DA2, None, "MODIFIER LETTER SMALL SCRIPT G", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DA3, None, "MODIFIER LETTER SMALL TURNED H", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DA4, None, "MODIFIER LETTER SMALL I WITH STROKE", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DA5, None, "MODIFIER LETTER SMALL IOTA", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DA6, None, "MODIFIER LETTER SMALL CAPITAL I", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DA7, None, "MODIFIER LETTER SMALL CAPITAL I WITH STROKE", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DA8, None, "MODIFIER LETTER SMALL J WITH CROSSED-TAIL", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DA9, None, "MODIFIER LETTER SMALL L WITH RETROFLEX HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DAA, None, "MODIFIER LETTER SMALL L WITH PALATAL HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DAB, None, "MODIFIER LETTER SMALL CAPITAL L", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DAC, None, "MODIFIER LETTER SMALL M WITH HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DAD, None, "MODIFIER LETTER SMALL TURNED M WITH LONG LEG", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DAE, None, "MODIFIER LETTER SMALL N WITH LEFT HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DAF, None, "MODIFIER LETTER SMALL N WITH RETROFLEX HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DB0, None, "MODIFIER LETTER SMALL CAPITAL N", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DB1, None, "MODIFIER LETTER SMALL BARRED O", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DB2, None, "MODIFIER LETTER SMALL PHI", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DB3, None, "MODIFIER LETTER SMALL S WITH HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DB4, None, "MODIFIER LETTER SMALL ESH", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DB5, None, "MODIFIER LETTER SMALL T WITH PALATAL HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DB6, None, "MODIFIER LETTER SMALL U BAR", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DB7, None, "MODIFIER LETTER SMALL UPSILON", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DB8, None, "MODIFIER LETTER SMALL CAPITAL U", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DB9, None, "MODIFIER LETTER SMALL V WITH HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DBA, None, "MODIFIER LETTER SMALL TURNED V", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DBB, None, "MODIFIER LETTER SMALL Z", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DBC, None, "MODIFIER LETTER SMALL Z WITH RETROFLEX HOOK", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DBD, None, "MODIFIER LETTER SMALL Z WITH CURL", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DBE, None, "MODIFIER LETTER SMALL EZH", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DBF, None, "MODIFIER LETTER SMALL THETA", 0x31, "Phonetic_Ext_Sup"),
    c(0x1DC0, None, "COMBINING DOTTED GRAVE ACCENT", 0x20, "Diacriticals_Sup"),
    c(0x1DC1, None, "COMBINING DOTTED ACUTE ACCENT", 0x20, "Diacriticals_Sup"),
    c(0x1DC2, None, "COMBINING SNAKE BELOW", 0x20, "Diacriticals_Sup"),
    c(0x1DC3, None, "COMBINING SUSPENSION MARK", 0x20, "Diacriticals_Sup"),
    c(0x1DC4, None, "COMBINING MACRON-ACUTE", 0x20, "Diacriticals_Sup"),
    c(0x1DC5, None, "COMBINING GRAVE-MACRON", 0x20, "Diacriticals_Sup"),
    c(0x1DC6, None, "COMBINING MACRON-GRAVE", 0x20, "Diacriticals_Sup"),
    c(0x1DC7, None, "COMBINING ACUTE-MACRON", 0x20, "Diacriticals_Sup"),
    c(0x1DC8, None, "COMBINING GRAVE-ACUTE-GRAVE", 0x20, "Diacriticals_Sup"),
    c(0x1DC9, None, "COMBINING ACUTE-GRAVE-ACUTE", 0x20, "Diacriticals_Sup"),
    c(0x1DCA, None, "COMBINING LATIN SMALL LETTER R BELOW", 0x20, "Diacriticals_Sup"),
    c(0x1DCB, None, "COMBINING BREVE-MACRON", 0x20, "Diacriticals_Sup"),
    c(0x1DCC, None, "COMBINING MACRON-BREVE", 0x20, "Diacriticals_Sup"),
    c(0x1DCD, None, "COMBINING DOUBLE CIRCUMFLEX ABOVE", 0x20, "Diacriticals_Sup"),
    c(0x1DCE, None, "COMBINING OGONEK ABOVE", 0x20, "Diacriticals_Sup"),
    c(0x1DCF, None, "COMBINING ZIGZAG BELOW", 0x20, "Diacriticals_Sup"),
    c(0x1DD0, None, "COMBINING IS BELOW", 0x20, "Diacriticals_Sup"),
    c(0x1DD1, None, "COMBINING UR ABOVE", 0x20, "Diacriticals_Sup"),
    c(0x1DD2, None, "COMBINING US ABOVE", 0x20, "Diacriticals_Sup"),
    c(0x1DD3, None, "COMBINING LATIN SMALL LETTER FLATTENED OPEN A ABOVE", 0x20, "Diacriticals_Sup"),
    c(0x1DD4, None, "COMBINING LATIN SMALL LETTER AE", 0x20, "Diacriticals_Sup"),
    c(0x1DD5, None, "COMBINING LATIN SMALL LETTER AO", 0x20, "Diacriticals_Sup"),
    c(0x1DD6, None, "COMBINING LATIN SMALL LETTER AV", 0x20, "Diacriticals_Sup"),
    c(0x1DD7, None, "COMBINING LATIN SMALL LETTER C CEDILLA", 0x20, "Diacriticals_Sup"),
    c(0x1DD8, None, "COMBINING LATIN SMALL LETTER INSULAR D", 0x20, "Diacriticals_Sup"),
    c(0x1DD9, None, "COMBINING LATIN SMALL LETTER ETH", 0x20, "Diacriticals_Sup"),
    c(0x1DDA, None, "COMBINING LATIN SMALL LETTER G", 0x20, "Diacriticals_Sup"),
    c(0x1DDB, None, "COMBINING LATIN LETTER SMALL CAPITAL G", 0x20, "Diacriticals_Sup"),
    c(0x1DDC, None, "COMBINING LATIN SMALL LETTER K", 0x20, "Diacriticals_Sup"),
    c(0x1DDD, None, "COMBINING LATIN SMALL LETTER L", 0x20, "Diacriticals_Sup"),
    c(0x1DDE, None, "COMBINING LATIN LETTER SMALL CAPITAL L", 0x20, "Diacriticals_Sup"),
    c(0x1DDF, None, "COMBINING LATIN LETTER SMALL CAPITAL M", 0x20, "Diacriticals_Sup"),
    c(0x1DE0, None, "COMBINING LATIN SMALL LETTER N", 0x20, "Diacriticals_Sup"),
    c(0x1DE1, None, "COMBINING LATIN LETTER SMALL CAPITAL N", 0x20, "Diacriticals_Sup"),
    c(0x1DE2, None, "COMBINING LATIN LETTER SMALL CAPITAL R", 0x20, "Diacriticals_Sup"),
    c(0x1DE3, None, "COMBINING LATIN SMALL LETTER R ROTUNDA", 0x20, "Diacriticals_Sup"),
    c(0x1DE4, None, "COMBINING LATIN SMALL LETTER S", 0x20, "Diacriticals_Sup"),
    c(0x1DE5, None, "COMBINING LATIN SMALL LETTER LONG S", 0x20, "Diacriticals_Sup"),
    c(0x1DE6, None, "COMBINING LATIN SMALL LETTER Z", 0x20, "Diacriticals_Sup"),
    c(0x1DE7, None, "COMBINING LATIN SMALL LETTER ALPHA", 0x21, "Diacriticals_Sup"),
    c(0x1DE8, None, "COMBINING LATIN SMALL LETTER B", 0x21, "Diacriticals_Sup"),
    c(0x1DE9, None, "COMBINING LATIN SMALL LETTER BETA", 0x21, "Diacriticals_Sup"),
    c(0x1DEA, None, "COMBINING LATIN SMALL LETTER SCHWA", 0x21, "Diacriticals_Sup"),
    c(0x1DEB, None, "COMBINING LATIN SMALL LETTER F", 0x21, "Diacriticals_Sup"),
    c(0x1DEC, None, "COMBINING LATIN SMALL LETTER L WITH DOUBLE MIDDLE TILDE", 0x21, "Diacriticals_Sup"),
    c(0x1DED, None, "COMBINING LATIN SMALL LETTER O WITH LIGHT CENTRALIZATION STROKE", 0x21, "Diacriticals_Sup"),
    c(0x1DEE, None, "COMBINING LATIN SMALL LETTER P", 0x21, "Diacriticals_Sup"),
    c(0x1DEF, None, "COMBINING LATIN SMALL LETTER ESH", 0x21, "Diacriticals_Sup"),
    c(0x1DF0, None, "COMBINING LATIN SMALL LETTER U WITH LIGHT CENTRALIZATION STROKE", 0x21, "Diacriticals_Sup"),
    c(0x1DF1, None, "COMBINING LATIN SMALL LETTER W", 0x21, "Diacriticals_Sup"),
    c(0x1DF2, None, "COMBINING LATIN SMALL LETTER A WITH DIAERESIS", 0x21, "Diacriticals_Sup"),
    c(0x1DF3, None, "COMBINING LATIN SMALL LETTER O WITH DIAERESIS", 0x21, "Diacriticals_Sup"),
    c(0x1DF4, None, "COMBINING LATIN SMALL LETTER U WITH DIAERESIS", 0x21, "Diacriticals_Sup"),
    c(0x1DF5, None, "COMBINING UP TACK ABOVE", 0x20, "Diacriticals_Sup"),
    c(0x1DF6, None, "COMBINING KAVYKA ABOVE RIGHT", 0x20, "Diacriticals_Sup"),
    c(0x1DF7, None, "COMBINING KAVYKA ABOVE LEFT", 0x20, "Diacriticals_Sup"),
    c(0x1DF8, None, "COMBINING DOT ABOVE LEFT", 0x20, "Diacriticals_Sup"),
    c(0x1DF9, None, "COMBINING WIDE INVERTED BRIDGE BELOW", 0x20, "Diacriticals_Sup"),
    c(0x1DFA, None, "COMBINING DOT BELOW LEFT", 0x20, "Diacriticals_Sup"),
    c(0x1DFB, None, "COMBINING DELETION MARK", 0x20, "Diacriticals_Sup"),
    c(0x1DFC, None, "COMBINING DOUBLE INVERTED BREVE BELOW", 0x20, "Diacriticals_Sup"),
    c(0x1DFD, None, "COMBINING ALMOST EQUAL TO BELOW", 0x20, "Diacriticals_Sup"),
    c(0x1DFE, None, "COMBINING LEFT ARROWHEAD ABOVE", 0x20, "Diacriticals_Sup"),
    c(0x1DFF, None, "COMBINING RIGHT ARROWHEAD AND DOWN ARROWHEAD BELOW", 0x20, "Diacriticals_Sup"),
    c(0x1E00, None, "LATIN CAPITAL LETTER A WITH RING BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E01, None, "LATIN SMALL LETTER A WITH RING BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E02, None, "LATIN CAPITAL LETTER B WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E03, None, "LATIN SMALL LETTER B WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E04, None, "LATIN CAPITAL LETTER B WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E05, None, "LATIN SMALL LETTER B WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E06, None, "LATIN CAPITAL LETTER B WITH LINE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E07, None, "LATIN SMALL LETTER B WITH LINE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E08, None, "LATIN CAPITAL LETTER C WITH CEDILLA AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E09, None, "LATIN SMALL LETTER C WITH CEDILLA AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E0A, None, "LATIN CAPITAL LETTER D WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E0B, None, "LATIN SMALL LETTER D WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E0C, None, "LATIN CAPITAL LETTER D WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E0D, None, "LATIN SMALL LETTER D WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E0E, None, "LATIN CAPITAL LETTER D WITH LINE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E0F, None, "LATIN SMALL LETTER D WITH LINE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E10, None, "LATIN CAPITAL LETTER D WITH CEDILLA", 0x31, "Latin_Ext_Additional"),
    c(0x1E11, None, "LATIN SMALL LETTER D WITH CEDILLA", 0x31, "Latin_Ext_Additional"),
    c(0x1E12, None, "LATIN CAPITAL LETTER D WITH CIRCUMFLEX BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E13, None, "LATIN SMALL LETTER D WITH CIRCUMFLEX BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E14, None, "LATIN CAPITAL LETTER E WITH MACRON AND GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E15, None, "LATIN SMALL LETTER E WITH MACRON AND GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E16, None, "LATIN CAPITAL LETTER E WITH MACRON AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E17, None, "LATIN SMALL LETTER E WITH MACRON AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E18, None, "LATIN CAPITAL LETTER E WITH CIRCUMFLEX BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E19, None, "LATIN SMALL LETTER E WITH CIRCUMFLEX BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E1A, None, "LATIN CAPITAL LETTER E WITH TILDE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E1B, None, "LATIN SMALL LETTER E WITH TILDE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E1C, None, "LATIN CAPITAL LETTER E WITH CEDILLA AND BREVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E1D, None, "LATIN SMALL LETTER E WITH CEDILLA AND BREVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E1E, None, "LATIN CAPITAL LETTER F WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E1F, None, "LATIN SMALL LETTER F WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E20, None, "LATIN CAPITAL LETTER G WITH MACRON", 0x31, "Latin_Ext_Additional"),
    c(0x1E21, None, "LATIN SMALL LETTER G WITH MACRON", 0x31, "Latin_Ext_Additional"),
    c(0x1E22, None, "LATIN CAPITAL LETTER H WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E23, None, "LATIN SMALL LETTER H WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E24, None, "LATIN CAPITAL LETTER H WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E25, None, "LATIN SMALL LETTER H WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E26, None, "LATIN CAPITAL LETTER H WITH DIAERESIS", 0x31, "Latin_Ext_Additional"),
    c(0x1E27, None, "LATIN SMALL LETTER H WITH DIAERESIS", 0x31, "Latin_Ext_Additional"),
    c(0x1E28, None, "LATIN CAPITAL LETTER H WITH CEDILLA", 0x31, "Latin_Ext_Additional"),
    c(0x1E29, None, "LATIN SMALL LETTER H WITH CEDILLA", 0x31, "Latin_Ext_Additional"),
    c(0x1E2A, None, "LATIN CAPITAL LETTER H WITH BREVE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E2B, None, "LATIN SMALL LETTER H WITH BREVE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E2C, None, "LATIN CAPITAL LETTER I WITH TILDE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E2D, None, "LATIN SMALL LETTER I WITH TILDE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E2E, None, "LATIN CAPITAL LETTER I WITH DIAERESIS AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E2F, None, "LATIN SMALL LETTER I WITH DIAERESIS AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E30, None, "LATIN CAPITAL LETTER K WITH ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E31, None, "LATIN SMALL LETTER K WITH ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E32, None, "LATIN CAPITAL LETTER K WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E33, None, "LATIN SMALL LETTER K WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E34, None, "LATIN CAPITAL LETTER K WITH LINE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E35, None, "LATIN SMALL LETTER K WITH LINE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E36, None, "LATIN CAPITAL LETTER L WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E37, None, "LATIN SMALL LETTER L WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E38, None, "LATIN CAPITAL LETTER L WITH DOT BELOW AND MACRON", 0x31, "Latin_Ext_Additional"),
    c(0x1E39, None, "LATIN SMALL LETTER L WITH DOT BELOW AND MACRON", 0x31, "Latin_Ext_Additional"),
    c(0x1E3A, None, "LATIN CAPITAL LETTER L WITH LINE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E3B, None, "LATIN SMALL LETTER L WITH LINE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E3C, None, "LATIN CAPITAL LETTER L WITH CIRCUMFLEX BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E3D, None, "LATIN SMALL LETTER L WITH CIRCUMFLEX BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E3E, None, "LATIN CAPITAL LETTER M WITH ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E3F, None, "LATIN SMALL LETTER M WITH ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E40, None, "LATIN CAPITAL LETTER M WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E41, None, "LATIN SMALL LETTER M WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E42, None, "LATIN CAPITAL LETTER M WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E43, None, "LATIN SMALL LETTER M WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E44, None, "LATIN CAPITAL LETTER N WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E45, None, "LATIN SMALL LETTER N WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E46, None, "LATIN CAPITAL LETTER N WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E47, None, "LATIN SMALL LETTER N WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E48, None, "LATIN CAPITAL LETTER N WITH LINE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E49, None, "LATIN SMALL LETTER N WITH LINE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E4A, None, "LATIN CAPITAL LETTER N WITH CIRCUMFLEX BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E4B, None, "LATIN SMALL LETTER N WITH CIRCUMFLEX BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E4C, None, "LATIN CAPITAL LETTER O WITH TILDE AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E4D, None, "LATIN SMALL LETTER O WITH TILDE AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E4E, None, "LATIN CAPITAL LETTER O WITH TILDE AND DIAERESIS", 0x31, "Latin_Ext_Additional"),
    c(0x1E4F, None, "LATIN SMALL LETTER O WITH TILDE AND DIAERESIS", 0x31, "Latin_Ext_Additional"),
    c(0x1E50, None, "LATIN CAPITAL LETTER O WITH MACRON AND GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E51, None, "LATIN SMALL LETTER O WITH MACRON AND GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E52, None, "LATIN CAPITAL LETTER O WITH MACRON AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E53, None, "LATIN SMALL LETTER O WITH MACRON AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E54, None, "LATIN CAPITAL LETTER P WITH ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E55, None, "LATIN SMALL LETTER P WITH ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E56, None, "LATIN CAPITAL LETTER P WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E57, None, "LATIN SMALL LETTER P WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E58, None, "LATIN CAPITAL LETTER R WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E59, None, "LATIN SMALL LETTER R WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E5A, None, "LATIN CAPITAL LETTER R WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E5B, None, "LATIN SMALL LETTER R WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E5C, None, "LATIN CAPITAL LETTER R WITH DOT BELOW AND MACRON", 0x31, "Latin_Ext_Additional"),
    c(0x1E5D, None, "LATIN SMALL LETTER R WITH DOT BELOW AND MACRON", 0x31, "Latin_Ext_Additional"),
    c(0x1E5E, None, "LATIN CAPITAL LETTER R WITH LINE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E5F, None, "LATIN SMALL LETTER R WITH LINE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E60, None, "LATIN CAPITAL LETTER S WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E61, None, "LATIN SMALL LETTER S WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E62, None, "LATIN CAPITAL LETTER S WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E63, None, "LATIN SMALL LETTER S WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E64, None, "LATIN CAPITAL LETTER S WITH ACUTE AND DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E65, None, "LATIN SMALL LETTER S WITH ACUTE AND DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E66, None, "LATIN CAPITAL LETTER S WITH CARON AND DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E67, None, "LATIN SMALL LETTER S WITH CARON AND DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E68, None, "LATIN CAPITAL LETTER S WITH DOT BELOW AND DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E69, None, "LATIN SMALL LETTER S WITH DOT BELOW AND DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E6A, None, "LATIN CAPITAL LETTER T WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E6B, None, "LATIN SMALL LETTER T WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E6C, None, "LATIN CAPITAL LETTER T WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E6D, None, "LATIN SMALL LETTER T WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E6E, None, "LATIN CAPITAL LETTER T WITH LINE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E6F, None, "LATIN SMALL LETTER T WITH LINE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E70, None, "LATIN CAPITAL LETTER T WITH CIRCUMFLEX BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E71, None, "LATIN SMALL LETTER T WITH CIRCUMFLEX BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E72, None, "LATIN CAPITAL LETTER U WITH DIAERESIS BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E73, None, "LATIN SMALL LETTER U WITH DIAERESIS BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E74, None, "LATIN CAPITAL LETTER U WITH TILDE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E75, None, "LATIN SMALL LETTER U WITH TILDE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E76, None, "LATIN CAPITAL LETTER U WITH CIRCUMFLEX BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E77, None, "LATIN SMALL LETTER U WITH CIRCUMFLEX BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E78, None, "LATIN CAPITAL LETTER U WITH TILDE AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E79, None, "LATIN SMALL LETTER U WITH TILDE AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E7A, None, "LATIN CAPITAL LETTER U WITH MACRON AND DIAERESIS", 0x31, "Latin_Ext_Additional"),
    c(0x1E7B, None, "LATIN SMALL LETTER U WITH MACRON AND DIAERESIS", 0x31, "Latin_Ext_Additional"),
    c(0x1E7C, None, "LATIN CAPITAL LETTER V WITH TILDE", 0x31, "Latin_Ext_Additional"),
    c(0x1E7D, None, "LATIN SMALL LETTER V WITH TILDE", 0x31, "Latin_Ext_Additional"),
    c(0x1E7E, None, "LATIN CAPITAL LETTER V WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E7F, None, "LATIN SMALL LETTER V WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E80, None, "LATIN CAPITAL LETTER W WITH GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E81, None, "LATIN SMALL LETTER W WITH GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E82, None, "LATIN CAPITAL LETTER W WITH ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E83, None, "LATIN SMALL LETTER W WITH ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1E84, None, "LATIN CAPITAL LETTER W WITH DIAERESIS", 0x31, "Latin_Ext_Additional"),
    c(0x1E85, None, "LATIN SMALL LETTER W WITH DIAERESIS", 0x31, "Latin_Ext_Additional"),
    c(0x1E86, None, "LATIN CAPITAL LETTER W WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E87, None, "LATIN SMALL LETTER W WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E88, None, "LATIN CAPITAL LETTER W WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E89, None, "LATIN SMALL LETTER W WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E8A, None, "LATIN CAPITAL LETTER X WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E8B, None, "LATIN SMALL LETTER X WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E8C, None, "LATIN CAPITAL LETTER X WITH DIAERESIS", 0x31, "Latin_Ext_Additional"),
    c(0x1E8D, None, "LATIN SMALL LETTER X WITH DIAERESIS", 0x31, "Latin_Ext_Additional"),
    c(0x1E8E, None, "LATIN CAPITAL LETTER Y WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E8F, None, "LATIN SMALL LETTER Y WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E90, None, "LATIN CAPITAL LETTER Z WITH CIRCUMFLEX", 0x31, "Latin_Ext_Additional"),
    c(0x1E91, None, "LATIN SMALL LETTER Z WITH CIRCUMFLEX", 0x31, "Latin_Ext_Additional"),
    c(0x1E92, None, "LATIN CAPITAL LETTER Z WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E93, None, "LATIN SMALL LETTER Z WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E94, None, "LATIN CAPITAL LETTER Z WITH LINE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E95, None, "LATIN SMALL LETTER Z WITH LINE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E96, None, "LATIN SMALL LETTER H WITH LINE BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1E97, None, "LATIN SMALL LETTER T WITH DIAERESIS", 0x31, "Latin_Ext_Additional"),
    c(0x1E98, None, "LATIN SMALL LETTER W WITH RING ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E99, None, "LATIN SMALL LETTER Y WITH RING ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E9A, None, "LATIN SMALL LETTER A WITH RIGHT HALF RING", 0x31, "Latin_Ext_Additional"),
    c(0x1E9B, None, "LATIN SMALL LETTER LONG S WITH DOT ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1E9C, None, "LATIN SMALL LETTER LONG S WITH DIAGONAL STROKE", 0x31, "Latin_Ext_Additional"),
    c(0x1E9D, None, "LATIN SMALL LETTER LONG S WITH HIGH STROKE", 0x31, "Latin_Ext_Additional"),
    c(0x1E9E, None, "LATIN CAPITAL LETTER SHARP S", 0x31, "Latin_Ext_Additional"),
    c(0x1E9F, None, "LATIN SMALL LETTER DELTA", 0x31, "Latin_Ext_Additional"),
    c(0x1EA0, None, "LATIN CAPITAL LETTER A WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1EA1, None, "LATIN SMALL LETTER A WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1EA2, None, "LATIN CAPITAL LETTER A WITH HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EA3, None, "LATIN SMALL LETTER A WITH HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EA4, None, "LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1EA5, None, "LATIN SMALL LETTER A WITH CIRCUMFLEX AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1EA6, None, "LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EA7, None, "LATIN SMALL LETTER A WITH CIRCUMFLEX AND GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EA8, None, "LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EA9, None, "LATIN SMALL LETTER A WITH CIRCUMFLEX AND HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EAA, None, "LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND TILDE", 0x31, "Latin_Ext_Additional"),
    c(0x1EAB, None, "LATIN SMALL LETTER A WITH CIRCUMFLEX AND TILDE", 0x31, "Latin_Ext_Additional"),
    c(0x1EAC, None, "LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1EAD, None, "LATIN SMALL LETTER A WITH CIRCUMFLEX AND DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1EAE, None, "LATIN CAPITAL LETTER A WITH BREVE AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1EAF, None, "LATIN SMALL LETTER A WITH BREVE AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1EB0, None, "LATIN CAPITAL LETTER A WITH BREVE AND GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EB1, None, "LATIN SMALL LETTER A WITH BREVE AND GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EB2, None, "LATIN CAPITAL LETTER A WITH BREVE AND HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EB3, None, "LATIN SMALL LETTER A WITH BREVE AND HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EB4, None, "LATIN CAPITAL LETTER A WITH BREVE AND TILDE", 0x31, "Latin_Ext_Additional"),
    c(0x1EB5, None, "LATIN SMALL LETTER A WITH BREVE AND TILDE", 0x31, "Latin_Ext_Additional"),
    c(0x1EB6, None, "LATIN CAPITAL LETTER A WITH BREVE AND DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1EB7, None, "LATIN SMALL LETTER A WITH BREVE AND DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1EB8, None, "LATIN CAPITAL LETTER E WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1EB9, None, "LATIN SMALL LETTER E WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1EBA, None, "LATIN CAPITAL LETTER E WITH HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EBB, None, "LATIN SMALL LETTER E WITH HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EBC, None, "LATIN CAPITAL LETTER E WITH TILDE", 0x31, "Latin_Ext_Additional"),
    c(0x1EBD, None, "LATIN SMALL LETTER E WITH TILDE", 0x31, "Latin_Ext_Additional"),
    c(0x1EBE, None, "LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1EBF, None, "LATIN SMALL LETTER E WITH CIRCUMFLEX AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1EC0, None, "LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EC1, None, "LATIN SMALL LETTER E WITH CIRCUMFLEX AND GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EC2, None, "LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EC3, None, "LATIN SMALL LETTER E WITH CIRCUMFLEX AND HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EC4, None, "LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND TILDE", 0x31, "Latin_Ext_Additional"),
    c(0x1EC5, None, "LATIN SMALL LETTER E WITH CIRCUMFLEX AND TILDE", 0x31, "Latin_Ext_Additional"),
    c(0x1EC6, None, "LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1EC7, None, "LATIN SMALL LETTER E WITH CIRCUMFLEX AND DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1EC8, None, "LATIN CAPITAL LETTER I WITH HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EC9, None, "LATIN SMALL LETTER I WITH HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1ECA, None, "LATIN CAPITAL LETTER I WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1ECB, None, "LATIN SMALL LETTER I WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1ECC, None, "LATIN CAPITAL LETTER O WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1ECD, None, "LATIN SMALL LETTER O WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1ECE, None, "LATIN CAPITAL LETTER O WITH HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1ECF, None, "LATIN SMALL LETTER O WITH HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1ED0, None, "LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1ED1, None, "LATIN SMALL LETTER O WITH CIRCUMFLEX AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1ED2, None, "LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1ED3, None, "LATIN SMALL LETTER O WITH CIRCUMFLEX AND GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1ED4, None, "LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1ED5, None, "LATIN SMALL LETTER O WITH CIRCUMFLEX AND HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1ED6, None, "LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND TILDE", 0x31, "Latin_Ext_Additional"),
    c(0x1ED7, None, "LATIN SMALL LETTER O WITH CIRCUMFLEX AND TILDE", 0x31, "Latin_Ext_Additional"),
    c(0x1ED8, None, "LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1ED9, None, "LATIN SMALL LETTER O WITH CIRCUMFLEX AND DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1EDA, None, "LATIN CAPITAL LETTER O WITH HORN AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1EDB, None, "LATIN SMALL LETTER O WITH HORN AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1EDC, None, "LATIN CAPITAL LETTER O WITH HORN AND GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EDD, None, "LATIN SMALL LETTER O WITH HORN AND GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EDE, None, "LATIN CAPITAL LETTER O WITH HORN AND HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EDF, None, "LATIN SMALL LETTER O WITH HORN AND HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EE0, None, "LATIN CAPITAL LETTER O WITH HORN AND TILDE", 0x31, "Latin_Ext_Additional"),
    c(0x1EE1, None, "LATIN SMALL LETTER O WITH HORN AND TILDE", 0x31, "Latin_Ext_Additional"),
    c(0x1EE2, None, "LATIN CAPITAL LETTER O WITH HORN AND DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1EE3, None, "LATIN SMALL LETTER O WITH HORN AND DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1EE4, None, "LATIN CAPITAL LETTER U WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1EE5, None, "LATIN SMALL LETTER U WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1EE6, None, "LATIN CAPITAL LETTER U WITH HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EE7, None, "LATIN SMALL LETTER U WITH HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EE8, None, "LATIN CAPITAL LETTER U WITH HORN AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1EE9, None, "LATIN SMALL LETTER U WITH HORN AND ACUTE", 0x31, "Latin_Ext_Additional"),
    c(0x1EEA, None, "LATIN CAPITAL LETTER U WITH HORN AND GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EEB, None, "LATIN SMALL LETTER U WITH HORN AND GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EEC, None, "LATIN CAPITAL LETTER U WITH HORN AND HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EED, None, "LATIN SMALL LETTER U WITH HORN AND HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EEE, None, "LATIN CAPITAL LETTER U WITH HORN AND TILDE", 0x31, "Latin_Ext_Additional"),
    c(0x1EEF, None, "LATIN SMALL LETTER U WITH HORN AND TILDE", 0x31, "Latin_Ext_Additional"),
    c(0x1EF0, None, "LATIN CAPITAL LETTER U WITH HORN AND DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1EF1, None, "LATIN SMALL LETTER U WITH HORN AND DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1EF2, None, "LATIN CAPITAL LETTER Y WITH GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EF3, None, "LATIN SMALL LETTER Y WITH GRAVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EF4, None, "LATIN CAPITAL LETTER Y WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1EF5, None, "LATIN SMALL LETTER Y WITH DOT BELOW", 0x31, "Latin_Ext_Additional"),
    c(0x1EF6, None, "LATIN CAPITAL LETTER Y WITH HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EF7, None, "LATIN SMALL LETTER Y WITH HOOK ABOVE", 0x31, "Latin_Ext_Additional"),
    c(0x1EF8, None, "LATIN CAPITAL LETTER Y WITH TILDE", 0x31, "Latin_Ext_Additional"),
    c(0x1EF9, None, "LATIN SMALL LETTER Y WITH TILDE", 0x31, "Latin_Ext_Additional"),
    c(0x1EFA, None, "LATIN CAPITAL LETTER MIDDLE-WELSH LL", 0x31, "Latin_Ext_Additional"),
    c(0x1EFB, None, "LATIN SMALL LETTER MIDDLE-WELSH LL", 0x31, "Latin_Ext_Additional"),
    c(0x1EFC, None, "LATIN CAPITAL LETTER MIDDLE-WELSH V", 0x31, "Latin_Ext_Additional"),
    c(0x1EFD, None, "LATIN SMALL LETTER MIDDLE-WELSH V", 0x31, "Latin_Ext_Additional"),
    c(0x1EFE, None, "LATIN CAPITAL LETTER Y WITH LOOP", 0x31, "Latin_Ext_Additional"),
    c(0x1EFF, None, "LATIN SMALL LETTER Y WITH LOOP", 0x31, "Latin_Ext_Additional"),
    c(0x1F00, None, "GREEK SMALL LETTER ALPHA WITH PSILI", 0x31, "Greek_Ext"),
    c(0x1F01, None, "GREEK SMALL LETTER ALPHA WITH DASIA", 0x31, "Greek_Ext"),
    c(0x1F02, None, "GREEK SMALL LETTER ALPHA WITH PSILI AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F03, None, "GREEK SMALL LETTER ALPHA WITH DASIA AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F04, None, "GREEK SMALL LETTER ALPHA WITH PSILI AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F05, None, "GREEK SMALL LETTER ALPHA WITH DASIA AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F06, None, "GREEK SMALL LETTER ALPHA WITH PSILI AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1F07, None, "GREEK SMALL LETTER ALPHA WITH DASIA AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1F08, None, "GREEK CAPITAL LETTER ALPHA WITH PSILI", 0x31, "Greek_Ext"),
    c(0x1F09, None, "GREEK CAPITAL LETTER ALPHA WITH DASIA", 0x31, "Greek_Ext"),
    c(0x1F0A, None, "GREEK CAPITAL LETTER ALPHA WITH PSILI AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F0B, None, "GREEK CAPITAL LETTER ALPHA WITH DASIA AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F0C, None, "GREEK CAPITAL LETTER ALPHA WITH PSILI AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F0D, None, "GREEK CAPITAL LETTER ALPHA WITH DASIA AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F0E, None, "GREEK CAPITAL LETTER ALPHA WITH PSILI AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1F0F, None, "GREEK CAPITAL LETTER ALPHA WITH DASIA AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1F10, None, "GREEK SMALL LETTER EPSILON WITH PSILI", 0x31, "Greek_Ext"),
    c(0x1F11, None, "GREEK SMALL LETTER EPSILON WITH DASIA", 0x31, "Greek_Ext"),
    c(0x1F12, None, "GREEK SMALL LETTER EPSILON WITH PSILI AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F13, None, "GREEK SMALL LETTER EPSILON WITH DASIA AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F14, None, "GREEK SMALL LETTER EPSILON WITH PSILI AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F15, None, "GREEK SMALL LETTER EPSILON WITH DASIA AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F18, None, "GREEK CAPITAL LETTER EPSILON WITH PSILI", 0x31, "Greek_Ext"),
    c(0x1F19, None, "GREEK CAPITAL LETTER EPSILON WITH DASIA", 0x31, "Greek_Ext"),
    c(0x1F1A, None, "GREEK CAPITAL LETTER EPSILON WITH PSILI AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F1B, None, "GREEK CAPITAL LETTER EPSILON WITH DASIA AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F1C, None, "GREEK CAPITAL LETTER EPSILON WITH PSILI AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F1D, None, "GREEK CAPITAL LETTER EPSILON WITH DASIA AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F20, None, "GREEK SMALL LETTER ETA WITH PSILI", 0x31, "Greek_Ext"),
    c(0x1F21, None, "GREEK SMALL LETTER ETA WITH DASIA", 0x31, "Greek_Ext"),
    c(0x1F22, None, "GREEK SMALL LETTER ETA WITH PSILI AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F23, None, "GREEK SMALL LETTER ETA WITH DASIA AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F24, None, "GREEK SMALL LETTER ETA WITH PSILI AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F25, None, "GREEK SMALL LETTER ETA WITH DASIA AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F26, None, "GREEK SMALL LETTER ETA WITH PSILI AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1F27, None, "GREEK SMALL LETTER ETA WITH DASIA AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1F28, None, "GREEK CAPITAL LETTER ETA WITH PSILI", 0x31, "Greek_Ext"),
    c(0x1F29, None, "GREEK CAPITAL LETTER ETA WITH DASIA", 0x31, "Greek_Ext"),
    c(0x1F2A, None, "GREEK CAPITAL LETTER ETA WITH PSILI AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F2B, None, "GREEK CAPITAL LETTER ETA WITH DASIA AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F2C, None, "GREEK CAPITAL LETTER ETA WITH PSILI AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F2D, None, "GREEK CAPITAL LETTER ETA WITH DASIA AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F2E, None, "GREEK CAPITAL LETTER ETA WITH PSILI AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1F2F, None, "GREEK CAPITAL LETTER ETA WITH DASIA AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1F30, None, "GREEK SMALL LETTER IOTA WITH PSILI", 0x31, "Greek_Ext"),
    c(0x1F31, None, "GREEK SMALL LETTER IOTA WITH DASIA", 0x31, "Greek_Ext"),
    c(0x1F32, None, "GREEK SMALL LETTER IOTA WITH PSILI AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F33, None, "GREEK SMALL LETTER IOTA WITH DASIA AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F34, None, "GREEK SMALL LETTER IOTA WITH PSILI AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F35, None, "GREEK SMALL LETTER IOTA WITH DASIA AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F36, None, "GREEK SMALL LETTER IOTA WITH PSILI AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1F37, None, "GREEK SMALL LETTER IOTA WITH DASIA AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1F38, None, "GREEK CAPITAL LETTER IOTA WITH PSILI", 0x31, "Greek_Ext"),
    c(0x1F39, None, "GREEK CAPITAL LETTER IOTA WITH DASIA", 0x31, "Greek_Ext"),
    c(0x1F3A, None, "GREEK CAPITAL LETTER IOTA WITH PSILI AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F3B, None, "GREEK CAPITAL LETTER IOTA WITH DASIA AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F3C, None, "GREEK CAPITAL LETTER IOTA WITH PSILI AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F3D, None, "GREEK CAPITAL LETTER IOTA WITH DASIA AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F3E, None, "GREEK CAPITAL LETTER IOTA WITH PSILI AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1F3F, None, "GREEK CAPITAL LETTER IOTA WITH DASIA AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1F40, None, "GREEK SMALL LETTER OMICRON WITH PSILI", 0x31, "Greek_Ext"),
    c(0x1F41, None, "GREEK SMALL LETTER OMICRON WITH DASIA", 0x31, "Greek_Ext"),
    c(0x1F42, None, "GREEK SMALL LETTER OMICRON WITH PSILI AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F43, None, "GREEK SMALL LETTER OMICRON WITH DASIA AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F44, None, "GREEK SMALL LETTER OMICRON WITH PSILI AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F45, None, "GREEK SMALL LETTER OMICRON WITH DASIA AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F48, None, "GREEK CAPITAL LETTER OMICRON WITH PSILI", 0x31, "Greek_Ext"),
    c(0x1F49, None, "GREEK CAPITAL LETTER OMICRON WITH DASIA", 0x31, "Greek_Ext"),
    c(0x1F4A, None, "GREEK CAPITAL LETTER OMICRON WITH PSILI AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F4B, None, "GREEK CAPITAL LETTER OMICRON WITH DASIA AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F4C, None, "GREEK CAPITAL LETTER OMICRON WITH PSILI AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F4D, None, "GREEK CAPITAL LETTER OMICRON WITH DASIA AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F50, None, "GREEK SMALL LETTER UPSILON WITH PSILI", 0x31, "Greek_Ext"),
    c(0x1F51, None, "GREEK SMALL LETTER UPSILON WITH DASIA", 0x31, "Greek_Ext"),
    c(0x1F52, None, "GREEK SMALL LETTER UPSILON WITH PSILI AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F53, None, "GREEK SMALL LETTER UPSILON WITH DASIA AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F54, None, "GREEK SMALL LETTER UPSILON WITH PSILI AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F55, None, "GREEK SMALL LETTER UPSILON WITH DASIA AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F56, None, "GREEK SMALL LETTER UPSILON WITH PSILI AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1F57, None, "GREEK SMALL LETTER UPSILON WITH DASIA AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1F59, None, "GREEK CAPITAL LETTER UPSILON WITH DASIA", 0x31, "Greek_Ext"),
    c(0x1F5B, None, "GREEK CAPITAL LETTER UPSILON WITH DASIA AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F5D, None, "GREEK CAPITAL LETTER UPSILON WITH DASIA AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F5F, None, "GREEK CAPITAL LETTER UPSILON WITH DASIA AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1F60, None, "GREEK SMALL LETTER OMEGA WITH PSILI", 0x31, "Greek_Ext"),
    c(0x1F61, None, "GREEK SMALL LETTER OMEGA WITH DASIA", 0x31, "Greek_Ext"),
    c(0x1F62, None, "GREEK SMALL LETTER OMEGA WITH PSILI AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F63, None, "GREEK SMALL LETTER OMEGA WITH DASIA AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F64, None, "GREEK SMALL LETTER OMEGA WITH PSILI AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F65, None, "GREEK SMALL LETTER OMEGA WITH DASIA AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F66, None, "GREEK SMALL LETTER OMEGA WITH PSILI AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1F67, None, "GREEK SMALL LETTER OMEGA WITH DASIA AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1F68, None, "GREEK CAPITAL LETTER OMEGA WITH PSILI", 0x31, "Greek_Ext"),
    c(0x1F69, None, "GREEK CAPITAL LETTER OMEGA WITH DASIA", 0x31, "Greek_Ext"),
    c(0x1F6A, None, "GREEK CAPITAL LETTER OMEGA WITH PSILI AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F6B, None, "GREEK CAPITAL LETTER OMEGA WITH DASIA AND VARIA", 0x31, "Greek_Ext"),
    c(0x1F6C, None, "GREEK CAPITAL LETTER OMEGA WITH PSILI AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F6D, None, "GREEK CAPITAL LETTER OMEGA WITH DASIA AND OXIA", 0x31, "Greek_Ext"),
    c(0x1F6E, None, "GREEK CAPITAL LETTER OMEGA WITH PSILI AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1F6F, None, "GREEK CAPITAL LETTER OMEGA WITH DASIA AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1F70, None, "GREEK SMALL LETTER ALPHA WITH VARIA", 0x31, "Greek_Ext"),
    c(0x1F71, None, "GREEK SMALL LETTER ALPHA WITH OXIA", 0x31, "Greek_Ext"),
    c(0x1F72, None, "GREEK SMALL LETTER EPSILON WITH VARIA", 0x31, "Greek_Ext"),
    c(0x1F73, None, "GREEK SMALL LETTER EPSILON WITH OXIA", 0x31, "Greek_Ext"),
    c(0x1F74, None, "GREEK SMALL LETTER ETA WITH VARIA", 0x31, "Greek_Ext"),
    c(0x1F75, None, "GREEK SMALL LETTER ETA WITH OXIA", 0x31, "Greek_Ext"),
    c(0x1F76, None, "GREEK SMALL LETTER IOTA WITH VARIA", 0x31, "Greek_Ext"),
    c(0x1F77, None, "GREEK SMALL LETTER IOTA WITH OXIA", 0x31, "Greek_Ext"),
    c(0x1F78, None, "GREEK SMALL LETTER OMICRON WITH VARIA", 0x31, "Greek_Ext"),
    c(0x1F79, None, "GREEK SMALL LETTER OMICRON WITH OXIA", 0x31, "Greek_Ext"),
    c(0x1F7A, None, "GREEK SMALL LETTER UPSILON WITH VARIA", 0x31, "Greek_Ext"),
    c(0x1F7B, None, "GREEK SMALL LETTER UPSILON WITH OXIA", 0x31, "Greek_Ext"),
    c(0x1F7C, None, "GREEK SMALL LETTER OMEGA WITH VARIA", 0x31, "Greek_Ext"),
    c(0x1F7D, None, "GREEK SMALL LETTER OMEGA WITH OXIA", 0x31, "Greek_Ext"),
    c(0x1F80, None, "GREEK SMALL LETTER ALPHA WITH PSILI AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F81, None, "GREEK SMALL LETTER ALPHA WITH DASIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F82, None, "GREEK SMALL LETTER ALPHA WITH PSILI AND VARIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F83, None, "GREEK SMALL LETTER ALPHA WITH DASIA AND VARIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F84, None, "GREEK SMALL LETTER ALPHA WITH PSILI AND OXIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F85, None, "GREEK SMALL LETTER ALPHA WITH DASIA AND OXIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F86, None, "GREEK SMALL LETTER ALPHA WITH PSILI AND PERISPOMENI AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F87, None, "GREEK SMALL LETTER ALPHA WITH DASIA AND PERISPOMENI AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F88, None, "GREEK CAPITAL LETTER ALPHA WITH PSILI AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F89, None, "GREEK CAPITAL LETTER ALPHA WITH DASIA AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F8A, None, "GREEK CAPITAL LETTER ALPHA WITH PSILI AND VARIA AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F8B, None, "GREEK CAPITAL LETTER ALPHA WITH DASIA AND VARIA AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F8C, None, "GREEK CAPITAL LETTER ALPHA WITH PSILI AND OXIA AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F8D, None, "GREEK CAPITAL LETTER ALPHA WITH DASIA AND OXIA AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F8E, None, "GREEK CAPITAL LETTER ALPHA WITH PSILI AND PERISPOMENI AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F8F, None, "GREEK CAPITAL LETTER ALPHA WITH DASIA AND PERISPOMENI AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F90, None, "GREEK SMALL LETTER ETA WITH PSILI AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F91, None, "GREEK SMALL LETTER ETA WITH DASIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F92, None, "GREEK SMALL LETTER ETA WITH PSILI AND VARIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F93, None, "GREEK SMALL LETTER ETA WITH DASIA AND VARIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F94, None, "GREEK SMALL LETTER ETA WITH PSILI AND OXIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F95, None, "GREEK SMALL LETTER ETA WITH DASIA AND OXIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F96, None, "GREEK SMALL LETTER ETA WITH PSILI AND PERISPOMENI AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F97, None, "GREEK SMALL LETTER ETA WITH DASIA AND PERISPOMENI AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F98, None, "GREEK CAPITAL LETTER ETA WITH PSILI AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F99, None, "GREEK CAPITAL LETTER ETA WITH DASIA AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F9A, None, "GREEK CAPITAL LETTER ETA WITH PSILI AND VARIA AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F9B, None, "GREEK CAPITAL LETTER ETA WITH DASIA AND VARIA AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F9C, None, "GREEK CAPITAL LETTER ETA WITH PSILI AND OXIA AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F9D, None, "GREEK CAPITAL LETTER ETA WITH DASIA AND OXIA AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F9E, None, "GREEK CAPITAL LETTER ETA WITH PSILI AND PERISPOMENI AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1F9F, None, "GREEK CAPITAL LETTER ETA WITH DASIA AND PERISPOMENI AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FA0, None, "GREEK SMALL LETTER OMEGA WITH PSILI AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FA1, None, "GREEK SMALL LETTER OMEGA WITH DASIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FA2, None, "GREEK SMALL LETTER OMEGA WITH PSILI AND VARIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FA3, None, "GREEK SMALL LETTER OMEGA WITH DASIA AND VARIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FA4, None, "GREEK SMALL LETTER OMEGA WITH PSILI AND OXIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FA5, None, "GREEK SMALL LETTER OMEGA WITH DASIA AND OXIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FA6, None, "GREEK SMALL LETTER OMEGA WITH PSILI AND PERISPOMENI AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FA7, None, "GREEK SMALL LETTER OMEGA WITH DASIA AND PERISPOMENI AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FA8, None, "GREEK CAPITAL LETTER OMEGA WITH PSILI AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FA9, None, "GREEK CAPITAL LETTER OMEGA WITH DASIA AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FAA, None, "GREEK CAPITAL LETTER OMEGA WITH PSILI AND VARIA AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FAB, None, "GREEK CAPITAL LETTER OMEGA WITH DASIA AND VARIA AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FAC, None, "GREEK CAPITAL LETTER OMEGA WITH PSILI AND OXIA AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FAD, None, "GREEK CAPITAL LETTER OMEGA WITH DASIA AND OXIA AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FAE, None, "GREEK CAPITAL LETTER OMEGA WITH PSILI AND PERISPOMENI AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FAF, None, "GREEK CAPITAL LETTER OMEGA WITH DASIA AND PERISPOMENI AND PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FB0, None, "GREEK SMALL LETTER ALPHA WITH VRACHY", 0x31, "Greek_Ext"),
    c(0x1FB1, None, "GREEK SMALL LETTER ALPHA WITH MACRON", 0x31, "Greek_Ext"),
    c(0x1FB2, None, "GREEK SMALL LETTER ALPHA WITH VARIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FB3, None, "GREEK SMALL LETTER ALPHA WITH YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FB4, None, "GREEK SMALL LETTER ALPHA WITH OXIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FB6, None, "GREEK SMALL LETTER ALPHA WITH PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1FB7, None, "GREEK SMALL LETTER ALPHA WITH PERISPOMENI AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FB8, None, "GREEK CAPITAL LETTER ALPHA WITH VRACHY", 0x31, "Greek_Ext"),
    c(0x1FB9, None, "GREEK CAPITAL LETTER ALPHA WITH MACRON", 0x31, "Greek_Ext"),
    c(0x1FBA, None, "GREEK CAPITAL LETTER ALPHA WITH VARIA", 0x31, "Greek_Ext"),
    c(0x1FBB, None, "GREEK CAPITAL LETTER ALPHA WITH OXIA", 0x31, "Greek_Ext"),
    c(0x1FBC, None, "GREEK CAPITAL LETTER ALPHA WITH PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FBD, None, "GREEK KORONIS", 0x00, "Greek_Ext"),
    c(0x1FBE, None, "GREEK PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FBF, None, "GREEK PSILI", 0x00, "Greek_Ext"),
    c(0x1FC0, None, "GREEK PERISPOMENI", 0x00, "Greek_Ext"),
    c(0x1FC1, None, "GREEK DIALYTIKA AND PERISPOMENI", 0x00, "Greek_Ext"),
    c(0x1FC2, None, "GREEK SMALL LETTER ETA WITH VARIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FC3, None, "GREEK SMALL LETTER ETA WITH YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FC4, None, "GREEK SMALL LETTER ETA WITH OXIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FC6, None, "GREEK SMALL LETTER ETA WITH PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1FC7, None, "GREEK SMALL LETTER ETA WITH PERISPOMENI AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FC8, None, "GREEK CAPITAL LETTER EPSILON WITH VARIA", 0x31, "Greek_Ext"),
    c(0x1FC9, None, "GREEK CAPITAL LETTER EPSILON WITH OXIA", 0x31, "Greek_Ext"),
    c(0x1FCA, None, "GREEK CAPITAL LETTER ETA WITH VARIA", 0x31, "Greek_Ext"),
    c(0x1FCB, None, "GREEK CAPITAL LETTER ETA WITH OXIA", 0x31, "Greek_Ext"),
    c(0x1FCC, None, "GREEK CAPITAL LETTER ETA WITH PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FCD, None, "GREEK PSILI AND VARIA", 0x00, "Greek_Ext"),
    c(0x1FCE, None, "GREEK PSILI AND OXIA", 0x00, "Greek_Ext"),
    c(0x1FCF, None, "GREEK PSILI AND PERISPOMENI", 0x00, "Greek_Ext"),
    c(0x1FD0, None, "GREEK SMALL LETTER IOTA WITH VRACHY", 0x31, "Greek_Ext"),
    c(0x1FD1, None, "GREEK SMALL LETTER IOTA WITH MACRON", 0x31, "Greek_Ext"),
    c(0x1FD2, None, "GREEK SMALL LETTER IOTA WITH DIALYTIKA AND VARIA", 0x31, "Greek_Ext"),
    c(0x1FD3, None, "GREEK SMALL LETTER IOTA WITH DIALYTIKA AND OXIA", 0x31, "Greek_Ext"),
    c(0x1FD6, None, "GREEK SMALL LETTER IOTA WITH PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1FD7, None, "GREEK SMALL LETTER IOTA WITH DIALYTIKA AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1FD8, None, "GREEK CAPITAL LETTER IOTA WITH VRACHY", 0x31, "Greek_Ext"),
    c(0x1FD9, None, "GREEK CAPITAL LETTER IOTA WITH MACRON", 0x31, "Greek_Ext"),
    c(0x1FDA, None, "GREEK CAPITAL LETTER IOTA WITH VARIA", 0x31, "Greek_Ext"),
    c(0x1FDB, None, "GREEK CAPITAL LETTER IOTA WITH OXIA", 0x31, "Greek_Ext"),
    c(0x1FDD, None, "GREEK DASIA AND VARIA", 0x00, "Greek_Ext"),
    c(0x1FDE, None, "GREEK DASIA AND OXIA", 0x00, "Greek_Ext"),
    c(0x1FDF, None, "GREEK DASIA AND PERISPOMENI", 0x00, "Greek_Ext"),
    c(0x1FE0, None, "GREEK SMALL LETTER UPSILON WITH VRACHY", 0x31, "Greek_Ext"),
    c(0x1FE1, None, "GREEK SMALL LETTER UPSILON WITH MACRON", 0x31, "Greek_Ext"),
    c(0x1FE2, None, "GREEK SMALL LETTER UPSILON WITH DIALYTIKA AND VARIA", 0x31, "Greek_Ext"),
    c(0x1FE3, None, "GREEK SMALL LETTER UPSILON WITH DIALYTIKA AND OXIA", 0x31, "Greek_Ext"),
    c(0x1FE4, None, "GREEK SMALL LETTER RHO WITH PSILI", 0x31, "Greek_Ext"),
    c(0x1FE5, None, "GREEK SMALL LETTER RHO WITH DASIA", 0x31, "Greek_Ext"),
    c(0x1FE6, None, "GREEK SMALL LETTER UPSILON WITH PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1FE7, None, "GREEK SMALL LETTER UPSILON WITH DIALYTIKA AND PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1FE8, None, "GREEK CAPITAL LETTER UPSILON WITH VRACHY", 0x31, "Greek_Ext"),
    c(0x1FE9, None, "GREEK CAPITAL LETTER UPSILON WITH MACRON", 0x31, "Greek_Ext"),
    c(0x1FEA, None, "GREEK CAPITAL LETTER UPSILON WITH VARIA", 0x31, "Greek_Ext"),
    c(0x1FEB, None, "GREEK CAPITAL LETTER UPSILON WITH OXIA", 0x31, "Greek_Ext"),
    c(0x1FEC, None, "GREEK CAPITAL LETTER RHO WITH DASIA", 0x31, "Greek_Ext"),
    c(0x1FED, None, "GREEK DIALYTIKA AND VARIA", 0x00, "Greek_Ext"),
    c(0x1FEE, None, "GREEK DIALYTIKA AND OXIA", 0x00, "Greek_Ext"),
    c(0x1FEF, None, "GREEK VARIA", 0x00, "Greek_Ext"),
    c(0x1FF2, None, "GREEK SMALL LETTER OMEGA WITH VARIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FF3, None, "GREEK SMALL LETTER OMEGA WITH YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FF4, None, "GREEK SMALL LETTER OMEGA WITH OXIA AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FF6, None, "GREEK SMALL LETTER OMEGA WITH PERISPOMENI", 0x31, "Greek_Ext"),
    c(0x1FF7, None, "GREEK SMALL LETTER OMEGA WITH PERISPOMENI AND YPOGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FF8, None, "GREEK CAPITAL LETTER OMICRON WITH VARIA", 0x31, "Greek_Ext"),
    c(0x1FF9, None, "GREEK CAPITAL LETTER OMICRON WITH OXIA", 0x31, "Greek_Ext"),
    c(0x1FFA, None, "GREEK CAPITAL LETTER OMEGA WITH VARIA", 0x31, "Greek_Ext"),
    c(0x1FFB, None, "GREEK CAPITAL LETTER OMEGA WITH OXIA", 0x31, "Greek_Ext"),
    c(0x1FFC, None, "GREEK CAPITAL LETTER OMEGA WITH PROSGEGRAMMENI", 0x31, "Greek_Ext"),
    c(0x1FFD, None, "GREEK OXIA", 0x00, "Greek_Ext"),
    c(0x1FFE, None, "GREEK DASIA", 0x00, "Greek_Ext"),
    c(0x2000, None, "EN QUAD", 0x00, "Punctuation"),
    c(0x2001, None, "EM QUAD", 0x00, "Punctuation"),
    c(0x2002, None, "EN SPACE", 0x00, "Punctuation"),
    c(0x2003, None, "EM SPACE", 0x00, "Punctuation"),
    c(0x2004, None, "THREE-PER-EM SPACE", 0x00, "Punctuation"),
    c(0x2005, None, "FOUR-PER-EM SPACE", 0x00, "Punctuation"),
    c(0x2006, None, "SIX-PER-EM SPACE", 0x00, "Punctuation"),
    c(0x2007, None, "FIGURE SPACE", 0x00, "Punctuation"),
    c(0x2008, None, "PUNCTUATION SPACE", 0x00, "Punctuation"),
    c(0x2009, None, "THIN SPACE", 0x00, "Punctuation"),
    c(0x200A, None, "HAIR SPACE", 0x00, "Punctuation"),
    c(0x200B, None, "ZERO WIDTH SPACE", 0x00, "Punctuation"),
    c(0x200C, None, "ZERO WIDTH NON-JOINER", 0x00, "Punctuation"),
    c(0x200D, None, "ZERO WIDTH JOINER", 0x00, "Punctuation"),
    c(0x200E, None, "LEFT-TO-RIGHT MARK", 0x00, "Punctuation"),
    c(0x200F, None, "RIGHT-TO-LEFT MARK", 0x00, "Punctuation"),
    c(0x2010, None, "HYPHEN", 0x00, "Punctuation"),
    c(0x2011, None, "NON-BREAKING HYPHEN", 0x00, "Punctuation"),
    c(0x2012, None, "FIGURE DASH", 0x00, "Punctuation"),
    c(0x2013, None, "EN DASH", 0x00, "Punctuation"),
    c(0x2014, None, "EM DASH", 0x00, "Punctuation"),
    c(0x2015, None, "HORIZONTAL BAR", 0x00, "Punctuation"),
    c(0x2016, None, "DOUBLE VERTICAL LINE", 0x02, "Punctuation"),
    c(0x2017, None, "DOUBLE LOW LINE", 0x00, "Punctuation"),
    c(0x2018, None, "LEFT SINGLE QUOTATION MARK", 0x00, "Punctuation"),
    c(0x2019, None, "RIGHT SINGLE QUOTATION MARK", 0x00, "Punctuation"),
    c(0x201A, None, "SINGLE LOW-9 QUOTATION MARK", 0x00, "Punctuation"),
    c(0x201B, None, "SINGLE HIGH-REVERSED-9 QUOTATION MARK", 0x00, "Punctuation"),
    c(0x201C, None, "LEFT DOUBLE QUOTATION MARK", 0x00, "Punctuation"),
    c(0x201D, None, "RIGHT DOUBLE QUOTATION MARK", 0x00, "Punctuation"),
    c(0x201E, None, "DOUBLE LOW-9 QUOTATION MARK", 0x00, "Punctuation"),
    c(0x201F, None, "DOUBLE HIGH-REVERSED-9 QUOTATION MARK", 0x00, "Punctuation"),
    c(0x2020, None, "DAGGER", 0x00, "Punctuation"),
    c(0x2021, None, "DOUBLE DAGGER", 0x00, "Punctuation"),
    c(0x2022, None, "BULLET", 0x00, "Punctuation"),
    c(0x2023, None, "TRIANGULAR BULLET", 0x00, "Punctuation"),
    c(0x2024, None, "ONE DOT LEADER", 0x00, "Punctuation"),
    c(0x2025, None, "TWO DOT LEADER", 0x00, "Punctuation"),
    c(0x2026, None, "HORIZONTAL ELLIPSIS", 0x00, "Punctuation"),
    c(0x2027, None, "HYPHENATION POINT", 0x00, "Punctuation"),
    c(0x2028, None, "LINE SEPARATOR", 0x00, "Punctuation"),
    c(0x2029, None, "PARAGRAPH SEPARATOR", 0x00, "Punctuation"),
    c(0x202A, None, "LEFT-TO-RIGHT EMBEDDING", 0x00, "Punctuation"),
    c(0x202B, None, "RIGHT-TO-LEFT EMBEDDING", 0x00, "Punctuation"),
    c(0x202C, None, "POP DIRECTIONAL FORMATTING", 0x00, "Punctuation"),
    c(0x202D, None, "LEFT-TO-RIGHT OVERRIDE", 0x00, "Punctuation"),
    c(0x202E, None, "RIGHT-TO-LEFT OVERRIDE", 0x00, "Punctuation"),
    c(0x202F, None, "NARROW NO-BREAK SPACE", 0x00, "Punctuation"),
    c(0x2030, None, "PER MILLE SIGN", 0x00, "Punctuation"),
    c(0x2031, None, "PER TEN THOUSAND SIGN", 0x00, "Punctuation"),
    c(0x2032, None, "PRIME", 0x02, "Punctuation"),
    c(0x2033, None, "DOUBLE PRIME", 0x02, "Punctuation"),
    c(0x2034, None, "TRIPLE PRIME", 0x02, "Punctuation"),
    c(0x2035, None, "REVERSED PRIME", 0x00, "Punctuation"),
    c(0x2036, None, "REVERSED DOUBLE PRIME", 0x00, "Punctuation"),
    c(0x2037, None, "REVERSED TRIPLE PRIME", 0x00, "Punctuation"),
    c(0x2038, None, "CARET", 0x00, "Punctuation"),
    c(0x2039, None, "SINGLE LEFT-POINTING ANGLE QUOTATION MARK", 0x00, "Punctuation"),
    c(0x203A, None, "SINGLE RIGHT-POINTING ANGLE QUOTATION MARK", 0x00, "Punctuation"),
    c(0x203B, None, "REFERENCE MARK", 0x00, "Punctuation"),
    c(0x203C, None, "DOUBLE EXCLAMATION MARK", 0x00, "Punctuation"),
    c(0x203D, None, "INTERROBANG", 0x00, "Punctuation"),
    c(0x203E, None, "OVERLINE", 0x00, "Punctuation"),
    c(0x203F, None, "UNDERTIE", 0x20, "Punctuation"),
    c(0x2040, None, "CHARACTER TIE", 0x22, "Punctuation"),
    c(0x2041, None, "CARET INSERTION POINT", 0x00, "Punctuation"),
    c(0x2042, None, "ASTERISM", 0x00, "Punctuation"),
    c(0x2043, None, "HYPHEN BULLET", 0x00, "Punctuation"),
    c(0x2044, None, "FRACTION SLASH", 0x02, "Punctuation"),
    c(0x2045, None, "LEFT SQUARE BRACKET WITH QUILL", 0x00, "Punctuation"),
    c(0x2046, None, "RIGHT SQUARE BRACKET WITH QUILL", 0x00, "Punctuation"),
    c(0x2047, None, "DOUBLE QUESTION MARK", 0x00, "Punctuation"),
    c(0x2048, None, "QUESTION EXCLAMATION MARK", 0x00, "Punctuation"),
    c(0x2049, None, "EXCLAMATION QUESTION MARK", 0x00, "Punctuation"),
    c(0x204A, None, "TIRONIAN SIGN ET", 0x00, "Punctuation"),
    c(0x204B, None, "REVERSED PILCROW SIGN", 0x00, "Punctuation"),
    c(0x204C, None, "BLACK LEFTWARDS BULLET", 0x00, "Punctuation"),
    c(0x204D, None, "BLACK RIGHTWARDS BULLET", 0x00, "Punctuation"),
    c(0x204E, None, "LOW ASTERISK", 0x00, "Punctuation"),
    c(0x204F, None, "REVERSED SEMICOLON", 0x00, "Punctuation"),
    c(0x2050, None, "CLOSE UP", 0x00, "Punctuation"),
    c(0x2051, None, "TWO ASTERISKS ALIGNED VERTICALLY", 0x00, "Punctuation"),
    c(0x2052, None, "COMMERCIAL MINUS SIGN", 0x02, "Punctuation"),
    c(0x2053, None, "SWUNG DASH", 0x00, "Punctuation"),
    c(0x2054, None, "INVERTED UNDERTIE", 0x20, "Punctuation"),
    c(0x2055, None, "FLOWER PUNCTUATION MARK", 0x00, "Punctuation"),
    c(0x2056, None, "THREE DOT PUNCTUATION", 0x00, "Punctuation"),
    c(0x2057, None, "QUADRUPLE PRIME", 0x00, "Punctuation"),
    c(0x2058, None, "FOUR DOT PUNCTUATION", 0x00, "Punctuation"),
    c(0x2059, None, "FIVE DOT PUNCTUATION", 0x00, "Punctuation"),
    c(0x205A, None, "TWO DOT PUNCTUATION", 0x00, "Punctuation"),
    c(0x205B, None, "FOUR DOT MARK", 0x00, "Punctuation"),
    c(0x205C, None, "DOTTED CROSS", 0x00, "Punctuation"),
    c(0x205D, None, "TRICOLON", 0x00, "Punctuation"),
    c(0x205E, None, "VERTICAL FOUR DOTS", 0x00, "Punctuation"),
    c(0x205F, None, "MEDIUM MATHEMATICAL SPACE", 0x00, "Punctuation"),
    c(0x2060, None, "WORD JOINER", 0x00, "Punctuation"),
    c(0x2061, None, "FUNCTION APPLICATION", 0x02, "Punctuation"),
    c(0x2062, None, "INVISIBLE TIMES", 0x02, "Punctuation"),
    c(0x2063, None, "INVISIBLE SEPARATOR", 0x02, "Punctuation"),
    c(0x2064, None, "INVISIBLE PLUS", 0x02, "Punctuation"),
    c(0x2066, None, "LEFT-TO-RIGHT ISOLATE", 0x00, "Punctuation"),
    c(0x2067, None, "RIGHT-TO-LEFT ISOLATE", 0x00, "Punctuation"),
    c(0x2068, None, "FIRST STRONG ISOLATE", 0x00, "Punctuation"),
    c(0x2069, None, "POP DIRECTIONAL ISOLATE", 0x00, "Punctuation"),
    c(0x206A, None, "INHIBIT SYMMETRIC SWAPPING", 0x08, "Punctuation"),
    c(0x206B, None, "ACTIVATE SYMMETRIC SWAPPING", 0x08, "Punctuation"),
    c(0x206C, None, "INHIBIT ARABIC FORM SHAPING", 0x08, "Punctuation"),
    c(0x206D, None, "ACTIVATE ARABIC FORM SHAPING", 0x08, "Punctuation"),
    c(0x206E, None, "NATIONAL DIGIT SHAPES", 0x08, "Punctuation"),
    c(0x206F, None, "NOMINAL DIGIT SHAPES", 0x08, "Punctuation"),
    c(0x2070, None, "SUPERSCRIPT ZERO", 0x00, "Super_And_Sub"),
    c(0x2071, None, "SUPERSCRIPT LATIN SMALL LETTER I", 0x31, "Super_And_Sub"),
    c(0x2074, None, "SUPERSCRIPT FOUR", 0x00, "Super_And_Sub"),
    c(0x2075, None, "SUPERSCRIPT FIVE", 0x00, "Super_And_Sub"),
    c(0x2076, None, "SUPERSCRIPT SIX", 0x00, "Super_And_Sub"),
    c(0x2077, None, "SUPERSCRIPT SEVEN", 0x00, "Super_And_Sub"),
    c(0x2078, None, "SUPERSCRIPT EIGHT", 0x00, "Super_And_Sub"),
    c(0x2079, None, "SUPERSCRIPT NINE", 0x00, "Super_And_Sub"),
    c(0x207A, None, "SUPERSCRIPT PLUS SIGN", 0x02, "Super_And_Sub"),
    c(0x207B, None, "SUPERSCRIPT MINUS", 0x02, "Super_And_Sub"),
    c(0x207C, None, "SUPERSCRIPT EQUALS SIGN", 0x02, "Super_And_Sub"),
    c(0x207D, None, "SUPERSCRIPT LEFT PARENTHESIS", 0x02, "Super_And_Sub"),
    c(0x207E, None, "SUPERSCRIPT RIGHT PARENTHESIS", 0x02, "Super_And_Sub"),
    c(0x207F, None, "SUPERSCRIPT LATIN SMALL LETTER N", 0x31, "Super_And_Sub"),
    c(0x2080, None, "SUBSCRIPT ZERO", 0x00, "Super_And_Sub"),
    c(0x2081, None, "SUBSCRIPT ONE", 0x00, "Super_And_Sub"),
    c(0x2082, None, "SUBSCRIPT TWO", 0x00, "Super_And_Sub"),
    c(0x2083, None, "SUBSCRIPT THREE", 0x00, "Super_And_Sub"),
    c(0x2084, None, "SUBSCRIPT FOUR", 0x00, "Super_And_Sub"),
    c(0x2085, None, "SUBSCRIPT FIVE", 0x00, "Super_And_Sub"),
    c(0x2086, None, "SUBSCRIPT SIX", 0x00, "Super_And_Sub"),
    c(0x2087, None, "SUBSCRIPT SEVEN", 0x00, "Super_And_Sub"),
    c(0x2088, None, "SUBSCRIPT EIGHT", 0x00, "Super_And_Sub"),
    c(0x2089, None, "SUBSCRIPT NINE", 0x00, "Super_And_Sub"),
    c(0x208A, None, "SUBSCRIPT PLUS SIGN", 0x02, "Super_And_Sub"),
    c(0x208B, None, "SUBSCRIPT MINUS", 0x02, "Super_And_Sub"),
    c(0x208C, None, "SUBSCRIPT EQUALS SIGN", 0x02, "Super_And_Sub"),
    c(0x208D, None, "SUBSCRIPT LEFT PARENTHESIS", 0x02, "Super_And_Sub"),
    c(0x208E, None, "SUBSCRIPT RIGHT PARENTHESIS", 0x02, "Super_And_Sub"),
    c(0x2090, None, "LATIN SUBSCRIPT SMALL LETTER A", 0x31, "Super_And_Sub"),
    c(0x2091, None, "LATIN SUBSCRIPT SMALL LETTER E", 0x31, "Super_And_Sub"),
    c(0x2092, None, "LATIN SUBSCRIPT SMALL LETTER O", 0x31, "Super_And_Sub"),
    c(0x2093, None, "LATIN SUBSCRIPT SMALL LETTER X", 0x31, "Super_And_Sub"),
    c(0x2094, None, "LATIN SUBSCRIPT SMALL LETTER SCHWA", 0x31, "Super_And_Sub"),
    c(0x2095, None, "LATIN SUBSCRIPT SMALL LETTER H", 0x31, "Super_And_Sub"),
    c(0x2096, None, "LATIN SUBSCRIPT SMALL LETTER K", 0x31, "Super_And_Sub"),
    c(0x2097, None, "LATIN SUBSCRIPT SMALL LETTER L", 0x31, "Super_And_Sub"),
    c(0x2098, None, "LATIN SUBSCRIPT SMALL LETTER M", 0x31, "Super_And_Sub"),
    c(0x2099, None, "LATIN SUBSCRIPT SMALL LETTER N", 0x31, "Super_And_Sub"),
    c(0x209A, None, "LATIN SUBSCRIPT SMALL LETTER P", 0x31, "Super_And_Sub"),
    c(0x209B, None, "LATIN SUBSCRIPT SMALL LETTER S", 0x31, "Super_And_Sub"),
    c(0x209C, None, "LATIN SUBSCRIPT SMALL LETTER T", 0x31, "Super_And_Sub"),
    c(0x20A0, None, "EURO-CURRENCY SIGN", 0x00, "Currency_Symbols"),
    c(0x20A1, None, "COLON SIGN", 0x00, "Currency_Symbols"),
    c(0x20A2, None, "CRUZEIRO SIGN", 0x00, "Currency_Symbols"),
    c(0x20A3, None, "FRENCH FRANC SIGN", 0x00, "Currency_Symbols"),
    c(0x20A4, None, "LIRA SIGN", 0x00, "Currency_Symbols"),
    c(0x20A5, None, "MILL SIGN", 0x00, "Currency_Symbols"),
    c(0x20A6, None, "NAIRA SIGN", 0x00, "Currency_Symbols"),
    c(0x20A7, None, "PESETA SIGN", 0x00, "Currency_Symbols"),
    c(0x20A8, None, "RUPEE SIGN", 0x00, "Currency_Symbols"),
    c(0x20A9, None, "WON SIGN", 0x00, "Currency_Symbols"),
    c(0x20AA, None, "NEW SHEQEL SIGN", 0x00, "Currency_Symbols"),
    c(0x20AB, None, "DONG SIGN", 0x00, "Currency_Symbols"),
    c(0x20AC, None, "EURO SIGN", 0x00, "Currency_Symbols"),
    c(0x20AD, None, "KIP SIGN", 0x00, "Currency_Symbols"),
    c(0x20AE, None, "TUGRIK SIGN", 0x00, "Currency_Symbols"),
    c(0x20AF, None, "DRACHMA SIGN", 0x00, "Currency_Symbols"),
    c(0x20B0, None, "GERMAN PENNY SIGN", 0x00, "Currency_Symbols"),
    c(0x20B1, None, "PESO SIGN", 0x00, "Currency_Symbols"),
    c(0x20B2, None, "GUARANI SIGN", 0x00, "Currency_Symbols"),
    c(0x20B3, None, "AUSTRAL SIGN", 0x00, "Currency_Symbols"),
    c(0x20B4, None, "HRYVNIA SIGN", 0x00, "Currency_Symbols"),
    c(0x20B5, None, "CEDI SIGN", 0x00, "Currency_Symbols"),
    c(0x20B6, None, "LIVRE TOURNOIS SIGN", 0x00, "Currency_Symbols"),
    c(0x20B7, None, "SPESMILO SIGN", 0x00, "Currency_Symbols"),
    c(0x20B8, None, "TENGE SIGN", 0x00, "Currency_Symbols"),
    c(0x20B9, None, "INDIAN RUPEE SIGN", 0x00, "Currency_Symbols"),
    c(0x20BA, None, "TURKISH LIRA SIGN", 0x00, "Currency_Symbols"),
    c(0x20BB, None, "NORDIC MARK SIGN", 0x00, "Currency_Symbols"),
    c(0x20BC, None, "MANAT SIGN", 0x00, "Currency_Symbols"),
    c(0x20BD, None, "RUBLE SIGN", 0x00, "Currency_Symbols"),
    c(0x20BE, None, "LARI SIGN", 0x00, "Currency_Symbols"),
    c(0x20BF, None, "BITCOIN SIGN", 0x00, "Currency_Symbols"),
    c(0x20C0, None, "SOM SIGN", 0x00, "Currency_Symbols"),
    c(0x20D0, None, "COMBINING LEFT HARPOON ABOVE", 0x22, "Diacriticals_For_Symbols"),
    c(0x20D1, None, "COMBINING RIGHT HARPOON ABOVE", 0x22, "Diacriticals_For_Symbols"),
    c(0x20D2, None, "COMBINING LONG VERTICAL LINE OVERLAY", 0x22, "Diacriticals_For_Symbols"),
    c(0x20D3, None, "COMBINING SHORT VERTICAL LINE OVERLAY", 0x22, "Diacriticals_For_Symbols"),
    c(0x20D4, None, "COMBINING ANTICLOCKWISE ARROW ABOVE", 0x22, "Diacriticals_For_Symbols"),
    c(0x20D5, None, "COMBINING CLOCKWISE ARROW ABOVE", 0x22, "Diacriticals_For_Symbols"),
    c(0x20D6, None, "COMBINING LEFT ARROW ABOVE", 0x22, "Diacriticals_For_Symbols"),
    c(0x20D7, None, "COMBINING RIGHT ARROW ABOVE", 0x22, "Diacriticals_For_Symbols"),
    c(0x20D8, None, "COMBINING RING OVERLAY", 0x22, "Diacriticals_For_Symbols"),
    c(0x20D9, None, "COMBINING CLOCKWISE RING OVERLAY", 0x22, "Diacriticals_For_Symbols"),
    c(0x20DA, None, "COMBINING ANTICLOCKWISE RING OVERLAY", 0x22, "Diacriticals_For_Symbols"),
    c(0x20DB, None, "COMBINING THREE DOTS ABOVE", 0x22, "Diacriticals_For_Symbols"),
    c(0x20DC, None, "COMBINING FOUR DOTS ABOVE", 0x22, "Diacriticals_For_Symbols"),
    c(0x20DD, None, "COMBINING ENCLOSING CIRCLE", 0x00, "Diacriticals_For_Symbols"),
    c(0x20DE, None, "COMBINING ENCLOSING SQUARE", 0x00, "Diacriticals_For_Symbols"),
    c(0x20DF, None, "COMBINING ENCLOSING DIAMOND", 0x00, "Diacriticals_For_Symbols"),
    c(0x20E0, None, "COMBINING ENCLOSING CIRCLE BACKSLASH", 0x00, "Diacriticals_For_Symbols"),
    c(0x20E1, None, "COMBINING LEFT RIGHT ARROW ABOVE", 0x22, "Diacriticals_For_Symbols"),
    c(0x20E2, None, "COMBINING ENCLOSING SCREEN", 0x00, "Diacriticals_For_Symbols"),
    c(0x20E3, None, "COMBINING ENCLOSING KEYCAP", 0x00, "Diacriticals_For_Symbols"),
    c(0x20E4, None, "COMBINING ENCLOSING UPWARD POINTING TRIANGLE", 0x00, "Diacriticals_For_Symbols"),
    c(0x20E5, None, "COMBINING REVERSE SOLIDUS OVERLAY", 0x22, "Diacriticals_For_Symbols"),
    c(0x20E6, None, "COMBINING DOUBLE VERTICAL STROKE OVERLAY", 0x22, "Diacriticals_For_Symbols"),
    c(0x20E7, None, "COMBINING ANNUITY SYMBOL", 0x20, "Diacriticals_For_Symbols"),
    c(0x20E8, None, "COMBINING TRIPLE UNDERDOT", 0x20, "Diacriticals_For_Symbols"),
    c(0x20E9, None, "COMBINING WIDE BRIDGE ABOVE", 0x20, "Diacriticals_For_Symbols"),
    c(0x20EA, None, "COMBINING LEFTWARDS ARROW OVERLAY", 0x20, "Diacriticals_For_Symbols"),
    c(0x20EB, None, "COMBINING LONG DOUBLE SOLIDUS OVERLAY", 0x22, "Diacriticals_For_Symbols"),
    c(0x20EC, None, "COMBINING RIGHTWARDS HARPOON WITH BARB DOWNWARDS", 0x22, "Diacriticals_For_Symbols"),
    c(0x20ED, None, "COMBINING LEFTWARDS HARPOON WITH BARB DOWNWARDS", 0x22, "Diacriticals_For_Symbols"),
    c(0x20EE, None, "COMBINING LEFT ARROW BELOW", 0x22, "Diacriticals_For_Symbols"),
    c(0x20EF, None, "COMBINING RIGHT ARROW BELOW", 0x22, "Diacriticals_For_Symbols"),
    c(0x20F0, None, "COMBINING ASTERISK ABOVE", 0x20, "Diacriticals_For_Symbols"),
    c(0x2100, None, "ACCOUNT OF", 0x00, "Letterlike_Symbols"),
    c(0x2101, None, "ADDRESSED TO THE SUBJECT", 0x00, "Letterlike_Symbols"),
    c(0x2102, None, "DOUBLE-STRUCK CAPITAL C", 0x33, "Letterlike_Symbols"),
    c(0x2103, None, "DEGREE CELSIUS", 0x00, "Letterlike_Symbols"),
    c(0x2104, None, "CENTRE LINE SYMBOL", 0x00, "Letterlike_Symbols"),
    c(0x2105, None, "CARE OF", 0x00, "Letterlike_Symbols"),
    c(0x2106, None, "CADA UNA", 0x00, "Letterlike_Symbols"),
    c(0x2107, None, "EULER CONSTANT", 0x33, "Letterlike_Symbols"),
    c(0x2108, None, "SCRUPLE", 0x00, "Letterlike_Symbols"),
    c(0x2109, None, "DEGREE FAHRENHEIT", 0x00, "Letterlike_Symbols"),
    c(0x210A, None, "SCRIPT SMALL G", 0x33, "Letterlike_Symbols"),
    c(0x210B, None, "SCRIPT CAPITAL H", 0x33, "Letterlike_Symbols"),
    c(0x210C, None, "BLACK-LETTER CAPITAL H", 0x33, "Letterlike_Symbols"),
    c(0x210D, None, "DOUBLE-STRUCK CAPITAL H", 0x33, "Letterlike_Symbols"),
    c(0x210E, None, "PLANCK CONSTANT", 0x33, "Letterlike_Symbols"),
    c(0x210F, None, "PLANCK CONSTANT OVER TWO PI", 0x33, "Letterlike_Symbols"),
    c(0x2110, None, "SCRIPT CAPITAL I", 0x33, "Letterlike_Symbols"),
    c(0x2111, None, "BLACK-LETTER CAPITAL I", 0x33, "Letterlike_Symbols"),
    c(0x2112, None, "SCRIPT CAPITAL L", 0x33, "Letterlike_Symbols"),
    c(0x2113, None, "SCRIPT SMALL L", 0x33, "Letterlike_Symbols"),
    c(0x2114, None, "L B BAR SYMBOL", 0x00, "Letterlike_Symbols"),
    c(0x2115, None, "DOUBLE-STRUCK CAPITAL N", 0x33, "Letterlike_Symbols"),
    c(0x2116, None, "NUMERO SIGN", 0x00, "Letterlike_Symbols"),
    c(0x2117, None, "SOUND RECORDING COPYRIGHT", 0x00, "Letterlike_Symbols"),
    c(0x2118, None, "WEIERSTRASS ELLIPTIC FUNCTION", 0x32, "Letterlike_Symbols"),
    c(0x2119, None, "DOUBLE-STRUCK CAPITAL P", 0x33, "Letterlike_Symbols"),
    c(0x211A, None, "DOUBLE-STRUCK CAPITAL Q", 0x33, "Letterlike_Symbols"),
    c(0x211B, None, "SCRIPT CAPITAL R", 0x33, "Letterlike_Symbols"),
    c(0x211C, None, "BLACK-LETTER CAPITAL R", 0x33, "Letterlike_Symbols"),
    c(0x211D, None, "DOUBLE-STRUCK CAPITAL R", 0x33, "Letterlike_Symbols"),
    c(0x211E, None, "PRESCRIPTION TAKE", 0x00, "Letterlike_Symbols"),
    c(0x211F, None, "RESPONSE", 0x00, "Letterlike_Symbols"),
    c(0x2120, None, "SERVICE MARK", 0x00, "Letterlike_Symbols"),
    c(0x2121, None, "TELEPHONE SIGN", 0x00, "Letterlike_Symbols"),
    c(0x2122, None, "TRADE MARK SIGN", 0x00, "Letterlike_Symbols"),
    c(0x2123, None, "VERSICLE", 0x00, "Letterlike_Symbols"),
    c(0x2124, None, "DOUBLE-STRUCK CAPITAL Z", 0x33, "Letterlike_Symbols"),
    c(0x2125, None, "OUNCE SIGN", 0x00, "Letterlike_Symbols"),
    c(0x2126, None, "OHM SIGN", 0x31, "Letterlike_Symbols"),
    c(0x2127, None, "INVERTED OHM SIGN", 0x00, "Letterlike_Symbols"),
    c(0x2128, None, "BLACK-LETTER CAPITAL Z", 0x33, "Letterlike_Symbols"),
    c(0x2129, None, "TURNED GREEK SMALL LETTER IOTA", 0x02, "Letterlike_Symbols"),
    c(0x212A, None, "KELVIN SIGN", 0x31, "Letterlike_Symbols"),
    c(0x212B, None, "ANGSTROM SIGN", 0x31, "Letterlike_Symbols"),
    c(0x212C, None, "SCRIPT CAPITAL B", 0x33, "Letterlike_Symbols"),
    c(0x212D, None, "BLACK-LETTER CAPITAL C", 0x33, "Letterlike_Symbols"),
    c(0x212E, None, "ESTIMATED SYMBOL", 0x30, "Letterlike_Symbols"),
    c(0x212F, None, "SCRIPT SMALL E", 0x33, "Letterlike_Symbols"),
    c(0x2130, None, "SCRIPT CAPITAL E", 0x33, "Letterlike_Symbols"),
    c(0x2131, None, "SCRIPT CAPITAL F", 0x33, "Letterlike_Symbols"),
    c(0x2132, None, "TURNED CAPITAL F", 0x31, "Letterlike_Symbols"),
    c(0x2133, None, "SCRIPT CAPITAL M", 0x33, "Letterlike_Symbols"),
    c(0x2134, None, "SCRIPT SMALL O", 0x33, "Letterlike_Symbols"),
    c(0x2135, None, "ALEF SYMBOL", 0x33, "Letterlike_Symbols"),
    c(0x2136, None, "BET SYMBOL", 0x33, "Letterlike_Symbols"),
    c(0x2137, None, "GIMEL SYMBOL", 0x33, "Letterlike_Symbols"),
    c(0x2138, None, "DALET SYMBOL", 0x33, "Letterlike_Symbols"),
    c(0x2139, None, "INFORMATION SOURCE", 0x31, "Letterlike_Symbols"),
    c(0x213A, None, "ROTATED CAPITAL Q", 0x00, "Letterlike_Symbols"),
    c(0x213B, None, "FACSIMILE SIGN", 0x00, "Letterlike_Symbols"),
    c(0x213C, None, "DOUBLE-STRUCK SMALL PI", 0x33, "Letterlike_Symbols"),
    c(0x213D, None, "DOUBLE-STRUCK SMALL GAMMA", 0x33, "Letterlike_Symbols"),
    c(0x213E, None, "DOUBLE-STRUCK CAPITAL GAMMA", 0x33, "Letterlike_Symbols"),
    c(0x213F, None, "DOUBLE-STRUCK CAPITAL PI", 0x33, "Letterlike_Symbols"),
    c(0x2140, None, "DOUBLE-STRUCK N-ARY SUMMATION", 0x02, "Letterlike_Symbols"),
    c(0x2141, None, "TURNED SANS-SERIF CAPITAL G", 0x02, "Letterlike_Symbols"),
    c(0x2142, None, "TURNED SANS-SERIF CAPITAL L", 0x02, "Letterlike_Symbols"),
    c(0x2143, None, "REVERSED SANS-SERIF CAPITAL L", 0x02, "Letterlike_Symbols"),
    c(0x2144, None, "TURNED SANS-SERIF CAPITAL Y", 0x02, "Letterlike_Symbols"),
    c(0x2145, None, "DOUBLE-STRUCK ITALIC CAPITAL D", 0x33, "Letterlike_Symbols"),
    c(0x2146, None, "DOUBLE-STRUCK ITALIC SMALL D", 0x33, "Letterlike_Symbols"),
    c(0x2147, None, "DOUBLE-STRUCK ITALIC SMALL E", 0x33, "Letterlike_Symbols"),
    c(0x2148, None, "DOUBLE-STRUCK ITALIC SMALL I", 0x33, "Letterlike_Symbols"),
    c(0x2149, None, "DOUBLE-STRUCK ITALIC SMALL J", 0x33, "Letterlike_Symbols"),
    c(0x214A, None, "PROPERTY LINE", 0x00, "Letterlike_Symbols"),
    c(0x214B, None, "TURNED AMPERSAND", 0x02, "Letterlike_Symbols"),
    c(0x214C, None, "PER SIGN", 0x00, "Letterlike_Symbols"),
    c(0x214D, None, "AKTIESELSKAB", 0x00, "Letterlike_Symbols"),
    c(0x214E, None, "TURNED SMALL F", 0x31, "Letterlike_Symbols"),
    c(0x214F, None, "SYMBOL FOR SAMARITAN SOURCE", 0x00, "Letterlike_Symbols"),
    c(0x2150, None, "VULGAR FRACTION ONE SEVENTH", 0x00, "Number_Forms"),
    c(0x2151, None, "VULGAR FRACTION ONE NINTH", 0x00, "Number_Forms"),
    c(0x2152, None, "VULGAR FRACTION ONE TENTH", 0x00, "Number_Forms"),
    c(0x2153, None, "VULGAR FRACTION ONE THIRD", 0x00, "Number_Forms"),
    c(0x2154, None, "VULGAR FRACTION TWO THIRDS", 0x00, "Number_Forms"),
    c(0x2155, None, "VULGAR FRACTION ONE FIFTH", 0x00, "Number_Forms"),
    c(0x2156, None, "VULGAR FRACTION TWO FIFTHS", 0x00, "Number_Forms"),
    c(0x2157, None, "VULGAR FRACTION THREE FIFTHS", 0x00, "Number_Forms"),
    c(0x2158, None, "VULGAR FRACTION FOUR FIFTHS", 0x00, "Number_Forms"),
    c(0x2159, None, "VULGAR FRACTION ONE SIXTH", 0x00, "Number_Forms"),
    c(0x215A, None, "VULGAR FRACTION FIVE SIXTHS", 0x00, "Number_Forms"),
    c(0x215B, None, "VULGAR FRACTION ONE EIGHTH", 0x00, "Number_Forms"),
    c(0x215C, None, "VULGAR FRACTION THREE EIGHTHS", 0x00, "Number_Forms"),
    c(0x215D, None, "VULGAR FRACTION FIVE EIGHTHS", 0x00, "Number_Forms"),
    c(0x215E, None, "VULGAR FRACTION SEVEN EIGHTHS", 0x00, "Number_Forms"),
    c(0x215F, None, "FRACTION NUMERATOR ONE", 0x00, "Number_Forms"),
    c(0x2160, None, "ROMAN NUMERAL ONE", 0x31, "Number_Forms"),
    c(0x2161, None, "ROMAN NUMERAL TWO", 0x31, "Number_Forms"),
    c(0x2162, None, "ROMAN NUMERAL THREE", 0x31, "Number_Forms"),
    c(0x2163, None, "ROMAN NUMERAL FOUR", 0x31, "Number_Forms"),
    c(0x2164, None, "ROMAN NUMERAL FIVE", 0x31, "Number_Forms"),
    c(0x2165, None, "ROMAN NUMERAL SIX", 0x31, "Number_Forms"),
    c(0x2166, None, "ROMAN NUMERAL SEVEN", 0x31, "Number_Forms"),
    c(0x2167, None, "ROMAN NUMERAL EIGHT", 0x31, "Number_Forms"),
    c(0x2168, None, "ROMAN NUMERAL NINE", 0x31, "Number_Forms"),
    c(0x2169, None, "ROMAN NUMERAL TEN", 0x31, "Number_Forms"),
    c(0x216A, None, "ROMAN NUMERAL ELEVEN", 0x31, "Number_Forms"),
    c(0x216B, None, "ROMAN NUMERAL TWELVE", 0x31, "Number_Forms"),
    c(0x216C, None, "ROMAN NUMERAL FIFTY", 0x31, "Number_Forms"),
    c(0x216D, None, "ROMAN NUMERAL ONE HUNDRED", 0x31, "Number_Forms"),
    c(0x216E, None, "ROMAN NUMERAL FIVE HUNDRED", 0x31, "Number_Forms"),
    c(0x216F, None, "ROMAN NUMERAL ONE THOUSAND", 0x31, "Number_Forms"),
    c(0x2170, None, "SMALL ROMAN NUMERAL ONE", 0x31, "Number_Forms"),
    c(0x2171, None, "SMALL ROMAN NUMERAL TWO", 0x31, "Number_Forms"),
    c(0x2172, None, "SMALL ROMAN NUMERAL THREE", 0x31, "Number_Forms"),
    c(0x2173, None, "SMALL ROMAN NUMERAL FOUR", 0x31, "Number_Forms"),
    c(0x2174, None, "SMALL ROMAN NUMERAL FIVE", 0x31, "Number_Forms"),
    c(0x2175, None, "SMALL ROMAN NUMERAL SIX", 0x31, "Number_Forms"),
    c(0x2176, None, "SMALL ROMAN NUMERAL SEVEN", 0x31, "Number_Forms"),
    c(0x2177, None, "SMALL ROMAN NUMERAL EIGHT", 0x31, "Number_Forms"),
    c(0x2178, None, "SMALL ROMAN NUMERAL NINE", 0x31, "Number_Forms"),
    c(0x2179, None, "SMALL ROMAN NUMERAL TEN", 0x31, "Number_Forms"),
    c(0x217A, None, "SMALL ROMAN NUMERAL ELEVEN", 0x31, "Number_Forms"),
    c(0x217B, None, "SMALL ROMAN NUMERAL TWELVE", 0x31, "Number_Forms"),
    c(0x217C, None, "SMALL ROMAN NUMERAL FIFTY", 0x31, "Number_Forms"),
    c(0x217D, None, "SMALL ROMAN NUMERAL ONE HUNDRED", 0x31, "Number_Forms"),
    c(0x217E, None, "SMALL ROMAN NUMERAL FIVE HUNDRED", 0x31, "Number_Forms"),
    c(0x217F, None, "SMALL ROMAN NUMERAL ONE THOUSAND", 0x31, "Number_Forms"),
    c(0x2180, None, "ROMAN NUMERAL ONE THOUSAND C D", 0x31, "Number_Forms"),
    c(0x2181, None, "ROMAN NUMERAL FIVE THOUSAND", 0x31, "Number_Forms"),
    c(0x2182, None, "ROMAN NUMERAL TEN THOUSAND", 0x31, "Number_Forms"),
    c(0x2183, None, "ROMAN NUMERAL REVERSED ONE HUNDRED", 0x31, "Number_Forms"),
    c(0x2184, None, "LATIN SMALL LETTER REVERSED C", 0x31, "Number_Forms"),
    c(0x2185, None, "ROMAN NUMERAL SIX LATE FORM", 0x31, "Number_Forms"),
    c(0x2186, None, "ROMAN NUMERAL FIFTY EARLY FORM", 0x31, "Number_Forms"),
    c(0x2187, None, "ROMAN NUMERAL FIFTY THOUSAND", 0x31, "Number_Forms"),
    c(0x2188, None, "ROMAN NUMERAL ONE HUNDRED THOUSAND", 0x31, "Number_Forms"),
    c(0x2189, None, "VULGAR FRACTION ZERO THIRDS", 0x00, "Number_Forms"),
    c(0x218A, None, "TURNED DIGIT TWO", 0x00, "Number_Forms"),
    c(0x218B, None, "TURNED DIGIT THREE", 0x00, "Number_Forms"),
    c(0x2190, None, "LEFTWARDS ARROW", 0x02, "Arrows"),
    c(0x2191, None, "UPWARDS ARROW", 0x02, "Arrows"),
    c(0x2192, None, "RIGHTWARDS ARROW", 0x02, "Arrows"),
    c(0x2193, None, "DOWNWARDS ARROW", 0x02, "Arrows"),
    c(0x2194, None, "LEFT RIGHT ARROW", 0x02, "Arrows"),
    c(0x2195, None, "UP DOWN ARROW", 0x02, "Arrows"),
    c(0x2196, None, "NORTH WEST ARROW", 0x02, "Arrows"),
    c(0x2197, None, "NORTH EAST ARROW", 0x02, "Arrows"),
    c(0x2198, None, "SOUTH EAST ARROW", 0x02, "Arrows"),
    c(0x2199, None, "SOUTH WEST ARROW", 0x02, "Arrows"),
    c(0x219A, None, "LEFTWARDS ARROW WITH STROKE", 0x02, "Arrows"),
    c(0x219B, None, "RIGHTWARDS ARROW WITH STROKE", 0x02, "Arrows"),
    c(0x219C, None, "LEFTWARDS WAVE ARROW", 0x02, "Arrows"),
    c(0x219D, None, "RIGHTWARDS WAVE ARROW", 0x02, "Arrows"),
    c(0x219E, None, "LEFTWARDS TWO HEADED ARROW", 0x02, "Arrows"),
    c(0x219F, None, "UPWARDS TWO HEADED ARROW", 0x02, "Arrows"),
    c(0x21A0, None, "RIGHTWARDS TWO HEADED ARROW", 0x02, "Arrows"),
    c(0x21A1, None, "DOWNWARDS TWO HEADED ARROW", 0x02, "Arrows"),
    c(0x21A2, None, "LEFTWARDS ARROW WITH TAIL", 0x02, "Arrows"),
    c(0x21A3, None, "RIGHTWARDS ARROW WITH TAIL", 0x02, "Arrows"),
    c(0x21A4, None, "LEFTWARDS ARROW FROM BAR", 0x02, "Arrows"),
    c(0x21A5, None, "UPWARDS ARROW FROM BAR", 0x02, "Arrows"),
    c(0x21A6, None, "RIGHTWARDS ARROW FROM BAR", 0x02, "Arrows"),
    c(0x21A7, None, "DOWNWARDS ARROW FROM BAR", 0x02, "Arrows"),
    c(0x21A8, None, "UP DOWN ARROW WITH BASE", 0x00, "Arrows"),
    c(0x21A9, None, "LEFTWARDS ARROW WITH HOOK", 0x02, "Arrows"),
    c(0x21AA, None, "RIGHTWARDS ARROW WITH HOOK", 0x02, "Arrows"),
    c(0x21AB, None, "LEFTWARDS ARROW WITH LOOP", 0x02, "Arrows"),
    c(0x21AC, None, "RIGHTWARDS ARROW WITH LOOP", 0x02, "Arrows"),
    c(0x21AD, None, "LEFT RIGHT WAVE ARROW", 0x02, "Arrows"),
    c(0x21AE, None, "LEFT RIGHT ARROW WITH STROKE", 0x02, "Arrows"),
    c(0x21AF, None, "DOWNWARDS ZIGZAG ARROW", 0x00, "Arrows"),
    c(0x21B0, None, "UPWARDS ARROW WITH TIP LEFTWARDS", 0x02, "Arrows"),
    c(0x21B1, None, "UPWARDS ARROW WITH TIP RIGHTWARDS", 0x02, "Arrows"),
    c(0x21B2, None, "DOWNWARDS ARROW WITH TIP LEFTWARDS", 0x00, "Arrows"),
    c(0x21B3, None, "DOWNWARDS ARROW WITH TIP RIGHTWARDS", 0x00, "Arrows"),
    c(0x21B4, None, "RIGHTWARDS ARROW WITH CORNER DOWNWARDS", 0x00, "Arrows"),
    c(0x21B5, None, "DOWNWARDS ARROW WITH CORNER LEFTWARDS", 0x00, "Arrows"),
    c(0x21B6, None, "ANTICLOCKWISE TOP SEMICIRCLE ARROW", 0x02, "Arrows"),
    c(0x21B7, None, "CLOCKWISE TOP SEMICIRCLE ARROW", 0x02, "Arrows"),
    c(0x21B8, None, "NORTH WEST ARROW TO LONG BAR", 0x00, "Arrows"),
    c(0x21B9, None, "LEFTWARDS ARROW TO BAR OVER RIGHTWARDS ARROW TO BAR", 0x00, "Arrows"),
    c(0x21BA, None, "ANTICLOCKWISE OPEN CIRCLE ARROW", 0x00, "Arrows"),
    c(0x21BB, None, "CLOCKWISE OPEN CIRCLE ARROW", 0x00, "Arrows"),
    c(0x21BC, None, "LEFTWARDS HARPOON WITH BARB UPWARDS", 0x02, "Arrows"),
    c(0x21BD, None, "LEFTWARDS HARPOON WITH BARB DOWNWARDS", 0x02, "Arrows"),
    c(0x21BE, None, "UPWARDS HARPOON WITH BARB RIGHTWARDS", 0x02, "Arrows"),
    c(0x21BF, None, "UPWARDS HARPOON WITH BARB LEFTWARDS", 0x02, "Arrows"),
    c(0x21C0, None, "RIGHTWARDS HARPOON WITH BARB UPWARDS", 0x02, "Arrows"),
    c(0x21C1, None, "RIGHTWARDS HARPOON WITH BARB DOWNWARDS", 0x02, "Arrows"),
    c(0x21C2, None, "DOWNWARDS HARPOON WITH BARB RIGHTWARDS", 0x02, "Arrows"),
    c(0x21C3, None, "DOWNWARDS HARPOON WITH BARB LEFTWARDS", 0x02, "Arrows"),
    c(0x21C4, None, "RIGHTWARDS ARROW OVER LEFTWARDS ARROW", 0x02, "Arrows"),
    c(0x21C5, None, "UPWARDS ARROW LEFTWARDS OF DOWNWARDS ARROW", 0x02, "Arrows"),
    c(0x21C6, None, "LEFTWARDS ARROW OVER RIGHTWARDS ARROW", 0x02, "Arrows"),
    c(0x21C7, None, "LEFTWARDS PAIRED ARROWS", 0x02, "Arrows"),
    c(0x21C8, None, "UPWARDS PAIRED ARROWS", 0x02, "Arrows"),
    c(0x21C9, None, "RIGHTWARDS PAIRED ARROWS", 0x02, "Arrows"),
    c(0x21CA, None, "DOWNWARDS PAIRED ARROWS", 0x02, "Arrows"),
    c(0x21CB, None, "LEFTWARDS HARPOON OVER RIGHTWARDS HARPOON", 0x02, "Arrows"),
    c(0x21CC, None, "RIGHTWARDS HARPOON OVER LEFTWARDS HARPOON", 0x02, "Arrows"),
    c(0x21CD, None, "LEFTWARDS DOUBLE ARROW WITH STROKE", 0x02, "Arrows"),
    c(0x21CE, None, "LEFT RIGHT DOUBLE ARROW WITH STROKE", 0x02, "Arrows"),
    c(0x21CF, None, "RIGHTWARDS DOUBLE ARROW WITH STROKE", 0x02, "Arrows"),
    c(0x21D0, None, "LEFTWARDS DOUBLE ARROW", 0x02, "Arrows"),
    c(0x21D1, None, "UPWARDS DOUBLE ARROW", 0x02, "Arrows"),
    c(0x21D2, None, "RIGHTWARDS DOUBLE ARROW", 0x02, "Arrows"),
    c(0x21D3, None, "DOWNWARDS DOUBLE ARROW", 0x02, "Arrows"),
    c(0x21D4, None, "LEFT RIGHT DOUBLE ARROW", 0x02, "Arrows"),
    c(0x21D5, None, "UP DOWN DOUBLE ARROW", 0x02, "Arrows"),
    c(0x21D6, None, "NORTH WEST DOUBLE ARROW", 0x02, "Arrows"),
    c(0x21D7, None, "NORTH EAST DOUBLE ARROW", 0x02, "Arrows"),
    c(0x21D8, None, "SOUTH EAST DOUBLE ARROW", 0x02, "Arrows"),
    c(0x21D9, None, "SOUTH WEST DOUBLE ARROW", 0x02, "Arrows"),
    c(0x21DA, None, "LEFTWARDS TRIPLE ARROW", 0x02, "Arrows"),
    c(0x21DB, None, "RIGHTWARDS TRIPLE ARROW", 0x02, "Arrows"),
    c(0x21DC, None, "LEFTWARDS SQUIGGLE ARROW", 0x00, "Arrows"),
    c(0x21DD, None, "RIGHTWARDS SQUIGGLE ARROW", 0x02, "Arrows"),
    c(0x21DE, None, "UPWARDS ARROW WITH DOUBLE STROKE", 0x00, "Arrows"),
    c(0x21DF, None, "DOWNWARDS ARROW WITH DOUBLE STROKE", 0x00, "Arrows"),
    c(0x21E0, None, "LEFTWARDS DASHED ARROW", 0x00, "Arrows"),
    c(0x21E1, None, "UPWARDS DASHED ARROW", 0x00, "Arrows"),
    c(0x21E2, None, "RIGHTWARDS DASHED ARROW", 0x00, "Arrows"),
    c(0x21E3, None, "DOWNWARDS DASHED ARROW", 0x00, "Arrows"),
    c(0x21E4, None, "LEFTWARDS ARROW TO BAR", 0x02, "Arrows"),
    c(0x21E5, None, "RIGHTWARDS ARROW TO BAR", 0x02, "Arrows"),
    c(0x21E6, None, "LEFTWARDS WHITE ARROW", 0x00, "Arrows"),
    c(0x21E7, None, "UPWARDS WHITE ARROW", 0x00, "Arrows"),
    c(0x21E8, None, "RIGHTWARDS WHITE ARROW", 0x00, "Arrows"),
    c(0x21E9, None, "DOWNWARDS WHITE ARROW", 0x00, "Arrows"),
    c(0x21EA, None, "UPWARDS WHITE ARROW FROM BAR", 0x00, "Arrows"),
    c(0x21EB, None, "UPWARDS WHITE ARROW ON PEDESTAL", 0x00, "Arrows"),
    c(0x21EC, None, "UPWARDS WHITE ARROW ON PEDESTAL WITH HORIZONTAL BAR", 0x00, "Arrows"),
    c(0x21ED, None, "UPWARDS WHITE ARROW ON PEDESTAL WITH VERTICAL BAR", 0x00, "Arrows"),
    c(0x21EE, None, "UPWARDS WHITE DOUBLE ARROW", 0x00, "Arrows"),
    c(0x21EF, None, "UPWARDS WHITE DOUBLE ARROW ON PEDESTAL", 0x00, "Arrows"),
    c(0x21F0, None, "RIGHTWARDS WHITE ARROW FROM WALL", 0x00, "Arrows"),
    c(0x21F1, None, "NORTH WEST ARROW TO CORNER", 0x00, "Arrows"),
    c(0x21F2, None, "SOUTH EAST ARROW TO CORNER", 0x00, "Arrows"),
    c(0x21F3, None, "UP DOWN WHITE ARROW", 0x00, "Arrows"),
    c(0x21F4, None, "RIGHT ARROW WITH SMALL CIRCLE", 0x02, "Arrows"),
    c(0x21F5, None, "DOWNWARDS ARROW LEFTWARDS OF UPWARDS ARROW", 0x02, "Arrows"),
    c(0x21F6, None, "THREE RIGHTWARDS ARROWS", 0x02, "Arrows"),
    c(0x21F7, None, "LEFTWARDS ARROW WITH VERTICAL STROKE", 0x02, "Arrows"),
    c(0x21F8, None, "RIGHTWARDS ARROW WITH VERTICAL STROKE", 0x02, "Arrows"),
    c(0x21F9, None, "LEFT RIGHT ARROW WITH VERTICAL STROKE", 0x02, "Arrows"),
    c(0x21FA, None, "LEFTWARDS ARROW WITH DOUBLE VERTICAL STROKE", 0x02, "Arrows"),
    c(0x21FB, None, "RIGHTWARDS ARROW WITH DOUBLE VERTICAL STROKE", 0x02, "Arrows"),
    c(0x21FC, None, "LEFT RIGHT ARROW WITH DOUBLE VERTICAL STROKE", 0x02, "Arrows"),
    c(0x21FD, None, "LEFTWARDS OPEN-HEADED ARROW", 0x02, "Arrows"),
    c(0x21FE, None, "RIGHTWARDS OPEN-HEADED ARROW", 0x02, "Arrows"),
    c(0x21FF, None, "LEFT RIGHT OPEN-HEADED ARROW", 0x02, "Arrows"),
    c(0x2200, None, "FOR ALL", 0x02, "Math_Operators"),
    c(0x2201, None, "COMPLEMENT", 0x02, "Math_Operators"),
    c(0x2202, None, "PARTIAL DIFFERENTIAL", 0x02, "Math_Operators"),
    c(0x2203, None, "THERE EXISTS", 0x02, "Math_Operators"),
    c(0x2204, None, "THERE DOES NOT EXIST", 0x02, "Math_Operators"),
    c(0x2205, None, "EMPTY SET", 0x02, "Math_Operators"),
    c(0x2206, None, "INCREMENT", 0x02, "Math_Operators"),
    c(0x2207, None, "NABLA", 0x02, "Math_Operators"),
    c(0x2208, None, "ELEMENT OF", 0x02, "Math_Operators"),
    c(0x2209, None, "NOT AN ELEMENT OF", 0x02, "Math_Operators"),
    c(0x220A, None, "SMALL ELEMENT OF", 0x02, "Math_Operators"),
    c(0x220B, None, "CONTAINS AS MEMBER", 0x02, "Math_Operators"),
    c(0x220C, None, "DOES NOT CONTAIN AS MEMBER", 0x02, "Math_Operators"),
    c(0x220D, None, "SMALL CONTAINS AS MEMBER", 0x02, "Math_Operators"),
    c(0x220E, None, "END OF PROOF", 0x02, "Math_Operators"),
    c(0x220F, None, "N-ARY PRODUCT", 0x02, "Math_Operators"),
    c(0x2210, None, "N-ARY COPRODUCT", 0x02, "Math_Operators"),
    c(0x2211, None, "N-ARY SUMMATION", 0x02, "Math_Operators"),
    c(0x2212, None, "MINUS SIGN", 0x02, "Math_Operators"),
    c(0x2213, None, "MINUS-OR-PLUS SIGN", 0x02, "Math_Operators"),
    c(0x2214, None, "DOT PLUS", 0x02, "Math_Operators"),
    c(0x2215, None, "DIVISION SLASH", 0x02, "Math_Operators"),
    c(0x2216, None, "SET MINUS", 0x02, "Math_Operators"),
    c(0x2217, None, "ASTERISK OPERATOR", 0x02, "Math_Operators"),
    c(0x2218, None, "RING OPERATOR", 0x02, "Math_Operators"),
    c(0x2219, None, "BULLET OPERATOR", 0x02, "Math_Operators"),
    c(0x221A, None, "SQUARE ROOT", 0x02, "Math_Operators"),
    c(0x221B, None, "CUBE ROOT", 0x02, "Math_Operators"),
    c(0x221C, None, "FOURTH ROOT", 0x02, "Math_Operators"),
    c(0x221D, None, "PROPORTIONAL TO", 0x02, "Math_Operators"),
    c(0x221E, None, "INFINITY", 0x02, "Math_Operators"),
    c(0x221F, None, "RIGHT ANGLE", 0x02, "Math_Operators"),
    c(0x2220, None, "ANGLE", 0x02, "Math_Operators"),
    c(0x2221, None, "MEASURED ANGLE", 0x02, "Math_Operators"),
    c(0x2222, None, "SPHERICAL ANGLE", 0x02, "Math_Operators"),
    c(0x2223, None, "DIVIDES", 0x02, "Math_Operators"),
    c(0x2224, None, "DOES NOT DIVIDE", 0x02, "Math_Operators"),
    c(0x2225, None, "PARALLEL TO", 0x02, "Math_Operators"),
    c(0x2226, None, "NOT PARALLEL TO", 0x02, "Math_Operators"),
    c(0x2227, None, "LOGICAL AND", 0x02, "Math_Operators"),
    c(0x2228, None, "LOGICAL OR", 0x02, "Math_Operators"),
    c(0x2229, None, "INTERSECTION", 0x02, "Math_Operators"),
    c(0x222A, None, "UNION", 0x02, "Math_Operators"),
    c(0x222B, None, "INTEGRAL", 0x02, "Math_Operators"),
    c(0x222C, None, "DOUBLE INTEGRAL", 0x02, "Math_Operators"),
    c(0x222D, None, "TRIPLE INTEGRAL", 0x02, "Math_Operators"),
    c(0x222E, None, "CONTOUR INTEGRAL", 0x02, "Math_Operators"),
    c(0x222F, None, "SURFACE INTEGRAL", 0x02, "Math_Operators"),
    c(0x2230, None, "VOLUME INTEGRAL", 0x02, "Math_Operators"),
    c(0x2231, None, "CLOCKWISE INTEGRAL", 0x02, "Math_Operators"),
    c(0x2232, None, "CLOCKWISE CONTOUR INTEGRAL", 0x02, "Math_Operators"),
    c(0x2233, None, "ANTICLOCKWISE CONTOUR INTEGRAL", 0x02, "Math_Operators"),
    c(0x2234, None, "THEREFORE", 0x02, "Math_Operators"),
    c(0x2235, None, "BECAUSE", 0x02, "Math_Operators"),
    c(0x2236, None, "RATIO", 0x02, "Math_Operators"),
    c(0x2237, None, "PROPORTION", 0x02, "Math_Operators"),
    c(0x2238, None, "DOT MINUS", 0x02, "Math_Operators"),
    c(0x2239, None, "EXCESS", 0x02, "Math_Operators"),
    c(0x223A, None, "GEOMETRIC PROPORTION", 0x02, "Math_Operators"),
    c(0x223B, None, "HOMOTHETIC", 0x02, "Math_Operators"),
    c(0x223C, None, "TILDE OPERATOR", 0x02, "Math_Operators"),
    c(0x223D, None, "REVERSED TILDE", 0x02, "Math_Operators"),
    c(0x223E, None, "INVERTED LAZY S", 0x02, "Math_Operators"),
    c(0x223F, None, "SINE WAVE", 0x02, "Math_Operators"),
    c(0x2240, None, "WREATH PRODUCT", 0x02, "Math_Operators"),
    c(0x2241, None, "NOT TILDE", 0x02, "Math_Operators"),
    c(0x2242, None, "MINUS TILDE", 0x02, "Math_Operators"),
    c(0x2243, None, "ASYMPTOTICALLY EQUAL TO", 0x02, "Math_Operators"),
    c(0x2244, None, "NOT ASYMPTOTICALLY EQUAL TO", 0x02, "Math_Operators"),
    c(0x2245, None, "APPROXIMATELY EQUAL TO", 0x02, "Math_Operators"),
    c(0x2246, None, "APPROXIMATELY BUT NOT ACTUALLY EQUAL TO", 0x02, "Math_Operators"),
    c(0x2247, None, "NEITHER APPROXIMATELY NOR ACTUALLY EQUAL TO", 0x02, "Math_Operators"),
    c(0x2248, None, "ALMOST EQUAL TO", 0x02, "Math_Operators"),
    c(0x2249, None, "NOT ALMOST EQUAL TO", 0x02, "Math_Operators"),
    c(0x224A, None, "ALMOST EQUAL OR EQUAL TO", 0x02, "Math_Operators"),
    c(0x224B, None, "TRIPLE TILDE", 0x02, "Math_Operators"),
    c(0x224C, None, "ALL EQUAL TO", 0x02, "Math_Operators"),
    c(0x224D, None, "EQUIVALENT TO", 0x02, "Math_Operators"),
    c(0x224E, None, "GEOMETRICALLY EQUIVALENT TO", 0x02, "Math_Operators"),
    c(0x224F, None, "DIFFERENCE BETWEEN", 0x02, "Math_Operators"),
    c(0x2250, None, "APPROACHES THE LIMIT", 0x02, "Math_Operators"),
    c(0x2251, None, "GEOMETRICALLY EQUAL TO", 0x02, "Math_Operators"),
    c(0x2252, None, "APPROXIMATELY EQUAL TO OR THE IMAGE OF", 0x02, "Math_Operators"),
    c(0x2253, None, "IMAGE OF OR APPROXIMATELY EQUAL TO", 0x02, "Math_Operators"),
    c(0x2254, None, "COLON EQUALS", 0x02, "Math_Operators"),
    c(0x2255, None, "EQUALS COLON", 0x02, "Math_Operators"),
    c(0x2256, None, "RING IN EQUAL TO", 0x02, "Math_Operators"),
    c(0x2257, None, "RING EQUAL TO", 0x02, "Math_Operators"),
    c(0x2258, None, "CORRESPONDS TO", 0x02, "Math_Operators"),
    c(0x2259, None, "ESTIMATES", 0x02, "Math_Operators"),
    c(0x225A, None, "EQUIANGULAR TO", 0x02, "Math_Operators"),
    c(0x225B, None, "STAR EQUALS", 0x02, "Math_Operators"),
    c(0x225C, None, "DELTA EQUAL TO", 0x02, "Math_Operators"),
    c(0x225D, None, "EQUAL TO BY DEFINITION", 0x02, "Math_Operators"),
    c(0x225E, None, "MEASURED BY", 0x02, "Math_Operators"),
    c(0x225F, None, "QUESTIONED EQUAL TO", 0x02, "Math_Operators"),
    c(0x2260, None, "NOT EQUAL TO", 0x02, "Math_Operators"),
    c(0x2261, None, "IDENTICAL TO", 0x02, "Math_Operators"),
    c(0x2262, None, "NOT IDENTICAL TO", 0x02, "Math_Operators"),
    c(0x2263, None, "STRICTLY EQUIVALENT TO", 0x02, "Math_Operators"),
    c(0x2264, None, "LESS-THAN OR EQUAL TO", 0x02, "Math_Operators"),
    c(0x2265, None, "GREATER-THAN OR EQUAL TO", 0x02, "Math_Operators"),
    c(0x2266, None, "LESS-THAN OVER EQUAL TO", 0x02, "Math_Operators"),
    c(0x2267, None, "GREATER-THAN OVER EQUAL TO", 0x02, "Math_Operators"),
    c(0x2268, None, "LESS-THAN BUT NOT EQUAL TO", 0x02, "Math_Operators"),
    c(0x2269, None, "GREATER-THAN BUT NOT EQUAL TO", 0x02, "Math_Operators"),
    c(0x226A, None, "MUCH LESS-THAN", 0x02, "Math_Operators"),
    c(0x226B, None, "MUCH GREATER-THAN", 0x02, "Math_Operators"),
    c(0x226C, None, "BETWEEN", 0x02, "Math_Operators"),
    c(0x226D, None, "NOT EQUIVALENT TO", 0x02, "Math_Operators"),
    c(0x226E, None, "NOT LESS-THAN", 0x02, "Math_Operators"),
    c(0x226F, None, "NOT GREATER-THAN", 0x02, "Math_Operators"),
    c(0x2270, None, "NEITHER LESS-THAN NOR EQUAL TO", 0x02, "Math_Operators"),
    c(0x2271, None, "NEITHER GREATER-THAN NOR EQUAL TO", 0x02, "Math_Operators"),
    c(0x2272, None, "LESS-THAN OR EQUIVALENT TO", 0x02, "Math_Operators"),
    c(0x2273, None, "GREATER-THAN OR EQUIVALENT TO", 0x02, "Math_Operators"),
    c(0x2274, None, "NEITHER LESS-THAN NOR EQUIVALENT TO", 0x02, "Math_Operators"),
    c(0x2275, None, "NEITHER GREATER-THAN NOR EQUIVALENT TO", 0x02, "Math_Operators"),
    c(0x2276, None, "LESS-THAN OR GREATER-THAN", 0x02, "Math_Operators"),
    c(0x2277, None, "GREATER-THAN OR LESS-THAN", 0x02, "Math_Operators"),
    c(0x2278, None, "NEITHER LESS-THAN NOR GREATER-THAN", 0x02, "Math_Operators"),
    c(0x2279, None, "NEITHER GREATER-THAN NOR LESS-THAN", 0x02, "Math_Operators"),
    c(0x227A, None, "PRECEDES", 0x02, "Math_Operators"),
    c(0x227B, None, "SUCCEEDS", 0x02, "Math_Operators"),
    c(0x227C, None, "PRECEDES OR EQUAL TO", 0x02, "Math_Operators"),
    c(0x227D, None, "SUCCEEDS OR EQUAL TO", 0x02, "Math_Operators"),
    c(0x227E, None, "PRECEDES OR EQUIVALENT TO", 0x02, "Math_Operators"),
    c(0x227F, None, "SUCCEEDS OR EQUIVALENT TO", 0x02, "Math_Operators"),
    c(0x2280, None, "DOES NOT PRECEDE", 0x02, "Math_Operators"),
    c(0x2281, None, "DOES NOT SUCCEED", 0x02, "Math_Operators"),
    c(0x2282, None, "SUBSET OF", 0x02, "Math_Operators"),
    c(0x2283, None, "SUPERSET OF", 0x02, "Math_Operators"),
    c(0x2284, None, "NOT A SUBSET OF", 0x02, "Math_Operators"),
    c(0x2285, None, "NOT A SUPERSET OF", 0x02, "Math_Operators"),
    c(0x2286, None, "SUBSET OF OR EQUAL TO", 0x02, "Math_Operators"),
    c(0x2287, None, "SUPERSET OF OR EQUAL TO", 0x02, "Math_Operators"),
    c(0x2288, None, "NEITHER A SUBSET OF NOR EQUAL TO", 0x02, "Math_Operators"),
    c(0x2289, None, "NEITHER A SUPERSET OF NOR EQUAL TO", 0x02, "Math_Operators"),
    c(0x228A, None, "SUBSET OF WITH NOT EQUAL TO", 0x02, "Math_Operators"),
    c(0x228B, None, "SUPERSET OF WITH NOT EQUAL TO", 0x02, "Math_Operators"),
    c(0x228C, None, "MULTISET", 0x02, "Math_Operators"),
    c(0x228D, None, "MULTISET MULTIPLICATION", 0x02, "Math_Operators"),
    c(0x228E, None, "MULTISET UNION", 0x02, "Math_Operators"),
    c(0x228F, None, "SQUARE IMAGE OF", 0x02, "Math_Operators"),
    c(0x2290, None, "SQUARE ORIGINAL OF", 0x02, "Math_Operators"),
    c(0x2291, None, "SQUARE IMAGE OF OR EQUAL TO", 0x02, "Math_Operators"),
    c(0x2292, None, "SQUARE ORIGINAL OF OR EQUAL TO", 0x02, "Math_Operators"),
    c(0x2293, None, "SQUARE CAP", 0x02, "Math_Operators"),
    c(0x2294, None, "SQUARE CUP", 0x02, "Math_Operators"),
    c(0x2295, None, "CIRCLED PLUS", 0x02, "Math_Operators"),
    c(0x2296, None, "CIRCLED MINUS", 0x02, "Math_Operators"),
    c(0x2297, None, "CIRCLED TIMES", 0x02, "Math_Operators"),
    c(0x2298, None, "CIRCLED DIVISION SLASH", 0x02, "Math_Operators"),
    c(0x2299, None, "CIRCLED DOT OPERATOR", 0x02, "Math_Operators"),
    c(0x229A, None, "CIRCLED RING OPERATOR", 0x02, "Math_Operators"),
    c(0x229B, None, "CIRCLED ASTERISK OPERATOR", 0x02, "Math_Operators"),
    c(0x229C, None, "CIRCLED EQUALS", 0x02, "Math_Operators"),
    c(0x229D, None, "CIRCLED DASH", 0x02, "Math_Operators"),
    c(0x229E, None, "SQUARED PLUS", 0x02, "Math_Operators"),
    c(0x229F, None, "SQUARED MINUS", 0x02, "Math_Operators"),
    c(0x22A0, None, "SQUARED TIMES", 0x02, "Math_Operators"),
    c(0x22A1, None, "SQUARED DOT OPERATOR", 0x02, "Math_Operators"),
    c(0x22A2, None, "RIGHT TACK", 0x02, "Math_Operators"),
    c(0x22A3, None, "LEFT TACK", 0x02, "Math_Operators"),
    c(0x22A4, None, "DOWN TACK", 0x02, "Math_Operators"),
    c(0x22A5, None, "UP TACK", 0x02, "Math_Operators"),
    c(0x22A6, None, "ASSERTION", 0x02, "Math_Operators"),
    c(0x22A7, None, "MODELS", 0x02, "Math_Operators"),
    c(0x22A8, None, "TRUE", 0x02, "Math_Operators"),
    c(0x22A9, None, "FORCES", 0x02, "Math_Operators"),
    c(0x22AA, None, "TRIPLE VERTICAL BAR RIGHT TURNSTILE", 0x02, "Math_Operators"),
    c(0x22AB, None, "DOUBLE VERTICAL BAR DOUBLE RIGHT TURNSTILE", 0x02, "Math_Operators"),
    c(0x22AC, None, "DOES NOT PROVE", 0x02, "Math_Operators"),
    c(0x22AD, None, "NOT TRUE", 0x02, "Math_Operators"),
    c(0x22AE, None, "DOES NOT FORCE", 0x02, "Math_Operators"),
    c(0x22AF, None, "NEGATED DOUBLE VERTICAL BAR DOUBLE RIGHT TURNSTILE", 0x02, "Math_Operators"),
    c(0x22B0, None, "PRECEDES UNDER RELATION", 0x02, "Math_Operators"),
    c(0x22B1, None, "SUCCEEDS UNDER RELATION", 0x02, "Math_Operators"),
    c(0x22B2, None, "NORMAL SUBGROUP OF", 0x02, "Math_Operators"),
    c(0x22B3, None, "CONTAINS AS NORMAL SUBGROUP", 0x02, "Math_Operators"),
    c(0x22B4, None, "NORMAL SUBGROUP OF OR EQUAL TO", 0x02, "Math_Operators"),
    c(0x22B5, None, "CONTAINS AS NORMAL SUBGROUP OR EQUAL TO", 0x02, "Math_Operators"),
    c(0x22B6, None, "ORIGINAL OF", 0x02, "Math_Operators"),
    c(0x22B7, None, "IMAGE OF", 0x02, "Math_Operators"),
    c(0x22B8, None, "MULTIMAP", 0x02, "Math_Operators"),
    c(0x22B9, None, "HERMITIAN CONJUGATE MATRIX", 0x02, "Math_Operators"),
    c(0x22BA, None, "INTERCALATE", 0x02, "Math_Operators"),
    c(0x22BB, None, "XOR", 0x02, "Math_Operators"),
    c(0x22BC, None, "NAND", 0x02, "Math_Operators"),
    c(0x22BD, None, "NOR", 0x02, "Math_Operators"),
    c(0x22BE, None, "RIGHT ANGLE WITH ARC", 0x02, "Math_Operators"),
    c(0x22BF, None, "RIGHT TRIANGLE", 0x02, "Math_Operators"),
    c(0x22C0, None, "N-ARY LOGICAL AND", 0x02, "Math_Operators"),
    c(0x22C1, None, "N-ARY LOGICAL OR", 0x02, "Math_Operators"),
    c(0x22C2, None, "N-ARY INTERSECTION", 0x02, "Math_Operators"),
    c(0x22C3, None, "N-ARY UNION", 0x02, "Math_Operators"),
    c(0x22C4, None, "DIAMOND OPERATOR", 0x02, "Math_Operators"),
    c(0x22C5, None, "DOT OPERATOR", 0x02, "Math_Operators"),
    c(0x22C6, None, "STAR OPERATOR", 0x02, "Math_Operators"),
    c(0x22C7, None, "DIVISION TIMES", 0x02, "Math_Operators"),
    c(0x22C8, None, "BOWTIE", 0x02, "Math_Operators"),
    c(0x22C9, None, "LEFT NORMAL FACTOR SEMIDIRECT PRODUCT", 0x02, "Math_Operators"),
    c(0x22CA, None, "RIGHT NORMAL FACTOR SEMIDIRECT PRODUCT", 0x02, "Math_Operators"),
    c(0x22CB, None, "LEFT SEMIDIRECT PRODUCT", 0x02, "Math_Operators"),
    c(0x22CC, None, "RIGHT SEMIDIRECT PRODUCT", 0x02, "Math_Operators"),
    c(0x22CD, None, "REVERSED TILDE EQUALS", 0x02, "Math_Operators"),
    c(0x22CE, None, "CURLY LOGICAL OR", 0x02, "Math_Operators"),
    c(0x22CF, None, "CURLY LOGICAL AND", 0x02, "Math_Operators"),
    c(0x22D0, None, "DOUBLE SUBSET", 0x02, "Math_Operators"),
    c(0x22D1, None, "DOUBLE SUPERSET", 0x02, "Math_Operators"),
    c(0x22D2, None, "DOUBLE INTERSECTION", 0x02, "Math_Operators"),
    c(0x22D3, None, "DOUBLE UNION", 0x02, "Math_Operators"),
    c(0x22D4, None, "PITCHFORK", 0x02, "Math_Operators"),
    c(0x22D5, None, "EQUAL AND PARALLEL TO", 0x02, "Math_Operators"),
    c(0x22D6, None, "LESS-THAN WITH DOT", 0x02, "Math_Operators"),
    c(0x22D7, None, "GREATER-THAN WITH DOT", 0x02, "Math_Operators"),
    c(0x22D8, None, "VERY MUCH LESS-THAN", 0x02, "Math_Operators"),
    c(0x22D9, None, "VERY MUCH GREATER-THAN", 0x02, "Math_Operators"),
    c(0x22DA, None, "LESS-THAN EQUAL TO OR GREATER-THAN", 0x02, "Math_Operators"),
    c(0x22DB, None, "GREATER-THAN EQUAL TO OR LESS-THAN", 0x02, "Math_Operators"),
    c(0x22DC, None, "EQUAL TO OR LESS-THAN", 0x02, "Math_Operators"),
    c(0x22DD, None, "EQUAL TO OR GREATER-THAN", 0x02, "Math_Operators"),
    c(0x22DE, None, "EQUAL TO OR PRECEDES", 0x02, "Math_Operators"),
    c(0x22DF, None, "EQUAL TO OR SUCCEEDS", 0x02, "Math_Operators"),
    c(0x22E0, None, "DOES NOT PRECEDE OR EQUAL", 0x02, "Math_Operators"),
    c(0x22E1, None, "DOES NOT SUCCEED OR EQUAL", 0x02, "Math_Operators"),
    c(0x22E2, None, "NOT SQUARE IMAGE OF OR EQUAL TO", 0x02, "Math_Operators"),
    c(0x22E3, None, "NOT SQUARE ORIGINAL OF OR EQUAL TO", 0x02, "Math_Operators"),
    c(0x22E4, None, "SQUARE IMAGE OF OR NOT EQUAL TO", 0x02, "Math_Operators"),
    c(0x22E5, None, "SQUARE ORIGINAL OF OR NOT EQUAL TO", 0x02, "Math_Operators"),
    c(0x22E6, None, "LESS-THAN BUT NOT EQUIVALENT TO", 0x02, "Math_Operators"),
    c(0x22E7, None, "GREATER-THAN BUT NOT EQUIVALENT TO", 0x02, "Math_Operators"),
    c(0x22E8, None, "PRECEDES BUT NOT EQUIVALENT TO", 0x02, "Math_Operators"),
    c(0x22E9, None, "SUCCEEDS BUT NOT EQUIVALENT TO", 0x02, "Math_Operators"),
    c(0x22EA, None, "NOT NORMAL SUBGROUP OF", 0x02, "Math_Operators"),
    c(0x22EB, None, "DOES NOT CONTAIN AS NORMAL SUBGROUP", 0x02, "Math_Operators"),
    c(0x22EC, None, "NOT NORMAL SUBGROUP OF OR EQUAL TO", 0x02, "Math_Operators"),
    c(0x22ED, None, "DOES NOT CONTAIN AS NORMAL SUBGROUP OR EQUAL", 0x02, "Math_Operators"),
    c(0x22EE, None, "VERTICAL ELLIPSIS", 0x02, "Math_Operators"),
    c(0x22EF, None, "MIDLINE HORIZONTAL ELLIPSIS", 0x02, "Math_Operators"),
    c(0x22F0, None, "UP RIGHT DIAGONAL ELLIPSIS", 0x02, "Math_Operators"),
    c(0x22F1, None, "DOWN RIGHT DIAGONAL ELLIPSIS", 0x02, "Math_Operators"),
    c(0x22F2, None, "ELEMENT OF WITH LONG HORIZONTAL STROKE", 0x02, "Math_Operators"),
    c(0x22F3, None, "ELEMENT OF WITH VERTICAL BAR AT END OF HORIZONTAL STROKE", 0x02, "Math_Operators"),
    c(0x22F4, None, "SMALL ELEMENT OF WITH VERTICAL BAR AT END OF HORIZONTAL STROKE", 0x02, "Math_Operators"),
    c(0x22F5, None, "ELEMENT OF WITH DOT ABOVE", 0x02, "Math_Operators"),
    c(0x22F6, None, "ELEMENT OF WITH OVERBAR", 0x02, "Math_Operators"),
    c(0x22F7, None, "SMALL ELEMENT OF WITH OVERBAR", 0x02, "Math_Operators"),
    c(0x22F8, None, "ELEMENT OF WITH UNDERBAR", 0x02, "Math_Operators"),
    c(0x22F9, None, "ELEMENT OF WITH TWO HORIZONTAL STROKES", 0x02, "Math_Operators"),
    c(0x22FA, None, "CONTAINS WITH LONG HORIZONTAL STROKE", 0x02, "Math_Operators"),
    c(0x22FB, None, "CONTAINS WITH VERTICAL BAR AT END OF HORIZONTAL STROKE", 0x02, "Math_Operators"),
    c(0x22FC, None, "SMALL CONTAINS WITH VERTICAL BAR AT END OF HORIZONTAL STROKE", 0x02, "Math_Operators"),
    c(0x22FD, None, "CONTAINS WITH OVERBAR", 0x02, "Math_Operators"),
    c(0x22FE, None, "SMALL CONTAINS WITH OVERBAR", 0x02, "Math_Operators"),
    c(0x22FF, None, "Z NOTATION BAG MEMBERSHIP", 0x02, "Math_Operators"),
    c(0x2300, None, "DIAMETER SIGN", 0x00, "Misc_Technical"),
    c(0x2301, None, "ELECTRIC ARROW", 0x00, "Misc_Technical"),
    c(0x2302, None, "HOUSE", 0x00, "Misc_Technical"),
    c(0x2303, None, "UP ARROWHEAD", 0x00, "Misc_Technical"),
    c(0x2304, None, "DOWN ARROWHEAD", 0x00, "Misc_Technical"),
    c(0x2305, None, "PROJECTIVE", 0x00, "Misc_Technical"),
    c(0x2306, None, "PERSPECTIVE", 0x00, "Misc_Technical"),
    c(0x2307, None, "WAVY LINE", 0x00, "Misc_Technical"),
    c(0x2308, None, "LEFT CEILING", 0x02, "Misc_Technical"),
    c(0x2309, None, "RIGHT CEILING", 0x02, "Misc_Technical"),
    c(0x230A, None, "LEFT FLOOR", 0x02, "Misc_Technical"),
    c(0x230B, None, "RIGHT FLOOR", 0x02, "Misc_Technical"),
    c(0x230C, None, "BOTTOM RIGHT CROP", 0x00, "Misc_Technical"),
    c(0x230D, None, "BOTTOM LEFT CROP", 0x00, "Misc_Technical"),
    c(0x230E, None, "TOP RIGHT CROP", 0x00, "Misc_Technical"),
    c(0x230F, None, "TOP LEFT CROP", 0x00, "Misc_Technical"),
    c(0x2310, None, "REVERSED NOT SIGN", 0x00, "Misc_Technical"),
    c(0x2311, None, "SQUARE LOZENGE", 0x00, "Misc_Technical"),
    c(0x2312, None, "ARC", 0x00, "Misc_Technical"),
    c(0x2313, None, "SEGMENT", 0x00, "Misc_Technical"),
    c(0x2314, None, "SECTOR", 0x00, "Misc_Technical"),
    c(0x2315, None, "TELEPHONE RECORDER", 0x00, "Misc_Technical"),
    c(0x2316, None, "POSITION INDICATOR", 0x00, "Misc_Technical"),
    c(0x2317, None, "VIEWDATA SQUARE", 0x00, "Misc_Technical"),
    c(0x2318, None, "PLACE OF INTEREST SIGN", 0x00, "Misc_Technical"),
    c(0x2319, None, "TURNED NOT SIGN", 0x00, "Misc_Technical"),
    c(0x231A, None, "WATCH", 0x00, "Misc_Technical"),
    c(0x231B, None, "HOURGLASS", 0x00, "Misc_Technical"),
    c(0x231C, None, "TOP LEFT CORNER", 0x00, "Misc_Technical"),
    c(0x231D, None, "TOP RIGHT CORNER", 0x00, "Misc_Technical"),
    c(0x231E, None, "BOTTOM LEFT CORNER", 0x00, "Misc_Technical"),
    c(0x231F, None, "BOTTOM RIGHT CORNER", 0x00, "Misc_Technical"),
    c(0x2320, None, "TOP HALF INTEGRAL", 0x02, "Misc_Technical"),
    c(0x2321, None, "BOTTOM HALF INTEGRAL", 0x02, "Misc_Technical"),
    c(0x2322, None, "FROWN", 0x00, "Misc_Technical"),
    c(0x2323, None, "SMILE", 0x00, "Misc_Technical"),
    c(0x2324, None, "UP ARROWHEAD BETWEEN TWO HORIZONTAL BARS", 0x00, "Misc_Technical"),
    c(0x2325, None, "OPTION KEY", 0x00, "Misc_Technical"),
    c(0x2326, None, "ERASE TO THE RIGHT", 0x00, "Misc_Technical"),
    c(0x2327, None, "X IN A RECTANGLE BOX", 0x00, "Misc_Technical"),
    c(0x2328, None, "KEYBOARD", 0x00, "Misc_Technical"),
    c(0x2329, None, "LEFT-POINTING ANGLE BRACKET", 0x08, "Misc_Technical"),
    c(0x232A, None, "RIGHT-POINTING ANGLE BRACKET", 0x08, "Misc_Technical"),
    c(0x232B, None, "ERASE TO THE LEFT", 0x00, "Misc_Technical"),
    c(0x232C, None, "BENZENE RING", 0x00, "Misc_Technical"),
    c(0x232D, None, "CYLINDRICITY", 0x00, "Misc_Technical"),
    c(0x232E, None, "ALL AROUND-PROFILE", 0x00, "Misc_Technical"),
    c(0x232F, None, "SYMMETRY", 0x00, "Misc_Technical"),
    c(0x2330, None, "TOTAL RUNOUT", 0x00, "Misc_Technical"),
    c(0x2331, None, "DIMENSION ORIGIN", 0x00, "Misc_Technical"),
    c(0x2332, None, "CONICAL TAPER", 0x00, "Misc_Technical"),
    c(0x2333, None, "SLOPE", 0x00, "Misc_Technical"),
    c(0x2334, None, "COUNTERBORE", 0x00, "Misc_Technical"),
    c(0x2335, None, "COUNTERSINK", 0x00, "Misc_Technical"),
    c(0x2336, None, "APL FUNCTIONAL SYMBOL I-BEAM", 0x00, "Misc_Technical"),
    c(0x2337, None, "APL FUNCTIONAL SYMBOL SQUISH QUAD", 0x00, "Misc_Technical"),
    c(0x2338, None, "APL FUNCTIONAL SYMBOL QUAD EQUAL", 0x00, "Misc_Technical"),
    c(0x2339, None, "APL FUNCTIONAL SYMBOL QUAD DIVIDE", 0x00, "Misc_Technical"),
    c(0x233A, None, "APL FUNCTIONAL SYMBOL QUAD DIAMOND", 0x00, "Misc_Technical"),
    c(0x233B, None, "APL FUNCTIONAL SYMBOL QUAD JOT", 0x00, "Misc_Technical"),
    c(0x233C, None, "APL FUNCTIONAL SYMBOL QUAD CIRCLE", 0x00, "Misc_Technical"),
    c(0x233D, None, "APL FUNCTIONAL SYMBOL CIRCLE STILE", 0x00, "Misc_Technical"),
    c(0x233E, None, "APL FUNCTIONAL SYMBOL CIRCLE JOT", 0x00, "Misc_Technical"),
    c(0x233F, None, "APL FUNCTIONAL SYMBOL SLASH BAR", 0x00, "Misc_Technical"),
    c(0x2340, None, "APL FUNCTIONAL SYMBOL BACKSLASH BAR", 0x00, "Misc_Technical"),
    c(0x2341, None, "APL FUNCTIONAL SYMBOL QUAD SLASH", 0x00, "Misc_Technical"),
    c(0x2342, None, "APL FUNCTIONAL SYMBOL QUAD BACKSLASH", 0x00, "Misc_Technical"),
    c(0x2343, None, "APL FUNCTIONAL SYMBOL QUAD LESS-THAN", 0x00, "Misc_Technical"),
    c(0x2344, None, "APL FUNCTIONAL SYMBOL QUAD GREATER-THAN", 0x00, "Misc_Technical"),
    c(0x2345, None, "APL FUNCTIONAL SYMBOL LEFTWARDS VANE", 0x00, "Misc_Technical"),
    c(0x2346, None, "APL FUNCTIONAL SYMBOL RIGHTWARDS VANE", 0x00, "Misc_Technical"),
    c(0x2347, None, "APL FUNCTIONAL SYMBOL QUAD LEFTWARDS ARROW", 0x00, "Misc_Technical"),
    c(0x2348, None, "APL FUNCTIONAL SYMBOL QUAD RIGHTWARDS ARROW", 0x00, "Misc_Technical"),
    c(0x2349, None, "APL FUNCTIONAL SYMBOL CIRCLE BACKSLASH", 0x00, "Misc_Technical"),
    c(0x234A, None, "APL FUNCTIONAL SYMBOL DOWN TACK UNDERBAR", 0x00, "Misc_Technical"),
    c(0x234B, None, "APL FUNCTIONAL SYMBOL DELTA STILE", 0x00, "Misc_Technical"),
    c(0x234C, None, "APL FUNCTIONAL SYMBOL QUAD DOWN CARET", 0x00, "Misc_Technical"),
    c(0x234D, None, "APL FUNCTIONAL SYMBOL QUAD DELTA", 0x00, "Misc_Technical"),
    c(0x234E, None, "APL FUNCTIONAL SYMBOL DOWN TACK JOT", 0x00, "Misc_Technical"),
    c(0x234F, None, "APL FUNCTIONAL SYMBOL UPWARDS VANE", 0x00, "Misc_Technical"),
    c(0x2350, None, "APL FUNCTIONAL SYMBOL QUAD UPWARDS ARROW", 0x00, "Misc_Technical"),
    c(0x2351, None, "APL FUNCTIONAL SYMBOL UP TACK OVERBAR", 0x00, "Misc_Technical"),
    c(0x2352, None, "APL FUNCTIONAL SYMBOL DEL STILE", 0x00, "Misc_Technical"),
    c(0x2353, None, "APL FUNCTIONAL SYMBOL QUAD UP CARET", 0x00, "Misc_Technical"),
    c(0x2354, None, "APL FUNCTIONAL SYMBOL QUAD DEL", 0x00, "Misc_Technical"),
    c(0x2355, None, "APL FUNCTIONAL SYMBOL UP TACK JOT", 0x00, "Misc_Technical"),
    c(0x2356, None, "APL FUNCTIONAL SYMBOL DOWNWARDS VANE", 0x00, "Misc_Technical"),
    c(0x2357, None, "APL FUNCTIONAL SYMBOL QUAD DOWNWARDS ARROW", 0x00, "Misc_Technical"),
    c(0x2358, None, "APL FUNCTIONAL SYMBOL QUOTE UNDERBAR", 0x00, "Misc_Technical"),
    c(0x2359, None, "APL FUNCTIONAL SYMBOL DELTA UNDERBAR", 0x00, "Misc_Technical"),
    c(0x235A, None, "APL FUNCTIONAL SYMBOL DIAMOND UNDERBAR", 0x00, "Misc_Technical"),
    c(0x235B, None, "APL FUNCTIONAL SYMBOL JOT UNDERBAR", 0x00, "Misc_Technical"),
    c(0x235C, None, "APL FUNCTIONAL SYMBOL CIRCLE UNDERBAR", 0x00, "Misc_Technical"),
    c(0x235D, None, "APL FUNCTIONAL SYMBOL UP SHOE JOT", 0x00, "Misc_Technical"),
    c(0x235E, None, "APL FUNCTIONAL SYMBOL QUOTE QUAD", 0x00, "Misc_Technical"),
    c(0x235F, None, "APL FUNCTIONAL SYMBOL CIRCLE STAR", 0x00, "Misc_Technical"),
    c(0x2360, None, "APL FUNCTIONAL SYMBOL QUAD COLON", 0x00, "Misc_Technical"),
    c(0x2361, None, "APL FUNCTIONAL SYMBOL UP TACK DIAERESIS", 0x00, "Misc_Technical"),
    c(0x2362, None, "APL FUNCTIONAL SYMBOL DEL DIAERESIS", 0x00, "Misc_Technical"),
    c(0x2363, None, "APL FUNCTIONAL SYMBOL STAR DIAERESIS", 0x00, "Misc_Technical"),
    c(0x2364, None, "APL FUNCTIONAL SYMBOL JOT DIAERESIS", 0x00, "Misc_Technical"),
    c(0x2365, None, "APL FUNCTIONAL SYMBOL CIRCLE DIAERESIS", 0x00, "Misc_Technical"),
    c(0x2366, None, "APL FUNCTIONAL SYMBOL DOWN SHOE STILE", 0x00, "Misc_Technical"),
    c(0x2367, None, "APL FUNCTIONAL SYMBOL LEFT SHOE STILE", 0x00, "Misc_Technical"),
    c(0x2368, None, "APL FUNCTIONAL SYMBOL TILDE DIAERESIS", 0x00, "Misc_Technical"),
    c(0x2369, None, "APL FUNCTIONAL SYMBOL GREATER-THAN DIAERESIS", 0x00, "Misc_Technical"),
    c(0x236A, None, "APL FUNCTIONAL SYMBOL COMMA BAR", 0x00, "Misc_Technical"),
    c(0x236B, None, "APL FUNCTIONAL SYMBOL DEL TILDE", 0x00, "Misc_Technical"),
    c(0x236C, None, "APL FUNCTIONAL SYMBOL ZILDE", 0x00, "Misc_Technical"),
    c(0x236D, None, "APL FUNCTIONAL SYMBOL STILE TILDE", 0x00, "Misc_Technical"),
    c(0x236E, None, "APL FUNCTIONAL SYMBOL SEMICOLON UNDERBAR", 0x00, "Misc_Technical"),
    c(0x236F, None, "APL FUNCTIONAL SYMBOL QUAD NOT EQUAL", 0x00, "Misc_Technical"),
    c(0x2370, None, "APL FUNCTIONAL SYMBOL QUAD QUESTION", 0x00, "Misc_Technical"),
    c(0x2371, None, "APL FUNCTIONAL SYMBOL DOWN CARET TILDE", 0x00, "Misc_Technical"),
    c(0x2372, None, "APL FUNCTIONAL SYMBOL UP CARET TILDE", 0x00, "Misc_Technical"),
    c(0x2373, None, "APL FUNCTIONAL SYMBOL IOTA", 0x00, "Misc_Technical"),
    c(0x2374, None, "APL FUNCTIONAL SYMBOL RHO", 0x00, "Misc_Technical"),
    c(0x2375, None, "APL FUNCTIONAL SYMBOL OMEGA", 0x00, "Misc_Technical"),
    c(0x2376, None, "APL FUNCTIONAL SYMBOL ALPHA UNDERBAR", 0x00, "Misc_Technical"),
    c(0x2377, None, "APL FUNCTIONAL SYMBOL EPSILON UNDERBAR", 0x00, "Misc_Technical"),
    c(0x2378, None, "APL FUNCTIONAL SYMBOL IOTA UNDERBAR", 0x00, "Misc_Technical"),
    c(0x2379, None, "APL FUNCTIONAL SYMBOL OMEGA UNDERBAR", 0x00, "Misc_Technical"),
    c(0x237A, None, "APL FUNCTIONAL SYMBOL ALPHA", 0x00, "Misc_Technical"),
    c(0x237B, None, "NOT CHECK MARK", 0x00, "Misc_Technical"),
    c(0x237C, None, "RIGHT ANGLE WITH DOWNWARDS ZIGZAG ARROW", 0x02, "Misc_Technical"),
    c(0x237D, None, "SHOULDERED OPEN BOX", 0x00, "Misc_Technical"),
    c(0x237E, None, "BELL SYMBOL", 0x00, "Misc_Technical"),
    c(0x237F, None, "VERTICAL LINE WITH MIDDLE DOT", 0x00, "Misc_Technical"),
    c(0x2380, None, "INSERTION SYMBOL", 0x00, "Misc_Technical"),
    c(0x2381, None, "CONTINUOUS UNDERLINE SYMBOL", 0x00, "Misc_Technical"),
    c(0x2382, None, "DISCONTINUOUS UNDERLINE SYMBOL", 0x00, "Misc_Technical"),
    c(0x2383, None, "EMPHASIS SYMBOL", 0x00, "Misc_Technical"),
    c(0x2384, None, "COMPOSITION SYMBOL", 0x00, "Misc_Technical"),
    c(0x2385, None, "WHITE SQUARE WITH CENTRE VERTICAL LINE", 0x00, "Misc_Technical"),
    c(0x2386, None, "ENTER SYMBOL", 0x00, "Misc_Technical"),
    c(0x2387, None, "ALTERNATIVE KEY SYMBOL", 0x00, "Misc_Technical"),
    c(0x2388, None, "HELM SYMBOL", 0x00, "Misc_Technical"),
    c(0x2389, None, "CIRCLED HORIZONTAL BAR WITH NOTCH", 0x00, "Misc_Technical"),
    c(0x238A, None, "CIRCLED TRIANGLE DOWN", 0x00, "Misc_Technical"),
    c(0x238B, None, "BROKEN CIRCLE WITH NORTHWEST ARROW", 0x00, "Misc_Technical"),
    c(0x238C, None, "UNDO SYMBOL", 0x00, "Misc_Technical"),
    c(0x238D, None, "MONOSTABLE SYMBOL", 0x00, "Misc_Technical"),
    c(0x238E, None, "HYSTERESIS SYMBOL", 0x00, "Misc_Technical"),
    c(0x238F, None, "OPEN-CIRCUIT-OUTPUT H-TYPE SYMBOL", 0x00, "Misc_Technical"),
    c(0x2390, None, "OPEN-CIRCUIT-OUTPUT L-TYPE SYMBOL", 0x00, "Misc_Technical"),
    c(0x2391, None, "PASSIVE-PULL-DOWN-OUTPUT SYMBOL", 0x00, "Misc_Technical"),
    c(0x2392, None, "PASSIVE-PULL-UP-OUTPUT SYMBOL", 0x00, "Misc_Technical"),
    c(0x2393, None, "DIRECT CURRENT SYMBOL FORM TWO", 0x00, "Misc_Technical"),
    c(0x2394, None, "SOFTWARE-FUNCTION SYMBOL", 0x00, "Misc_Technical"),
    c(0x2395, None, "APL FUNCTIONAL SYMBOL QUAD", 0x00, "Misc_Technical"),
    c(0x2396, None, "DECIMAL SEPARATOR KEY SYMBOL", 0x00, "Misc_Technical"),
    c(0x2397, None, "PREVIOUS PAGE", 0x00, "Misc_Technical"),
    c(0x2398, None, "NEXT PAGE", 0x00, "Misc_Technical"),
    c(0x2399, None, "PRINT SCREEN SYMBOL", 0x00, "Misc_Technical"),
    c(0x239A, None, "CLEAR SCREEN SYMBOL", 0x00, "Misc_Technical"),
    c(0x239B, None, "LEFT PARENTHESIS UPPER HOOK", 0x02, "Misc_Technical"),
    c(0x239C, None, "LEFT PARENTHESIS EXTENSION", 0x02, "Misc_Technical"),
    c(0x239D, None, "LEFT PARENTHESIS LOWER HOOK", 0x02, "Misc_Technical"),
    c(0x239E, None, "RIGHT PARENTHESIS UPPER HOOK", 0x02, "Misc_Technical"),
    c(0x239F, None, "RIGHT PARENTHESIS EXTENSION", 0x02, "Misc_Technical"),
    c(0x23A0, None, "RIGHT PARENTHESIS LOWER HOOK", 0x02, "Misc_Technical"),
    c(0x23A1, None, "LEFT SQUARE BRACKET UPPER CORNER", 0x02, "Misc_Technical"),
    c(0x23A2, None, "LEFT SQUARE BRACKET EXTENSION", 0x02, "Misc_Technical"),
    c(0x23A3, None, "LEFT SQUARE BRACKET LOWER CORNER", 0x02, "Misc_Technical"),
    c(0x23A4, None, "RIGHT SQUARE BRACKET UPPER CORNER", 0x02, "Misc_Technical"),
    c(0x23A5, None, "RIGHT SQUARE BRACKET EXTENSION", 0x02, "Misc_Technical"),
    c(0x23A6, None, "RIGHT SQUARE BRACKET LOWER CORNER", 0x02, "Misc_Technical"),
    c(0x23A7, None, "LEFT CURLY BRACKET UPPER HOOK", 0x02, "Misc_Technical"),
    c(0x23A8, None, "LEFT CURLY BRACKET MIDDLE PIECE", 0x02, "Misc_Technical"),
    c(0x23A9, None, "LEFT CURLY BRACKET LOWER HOOK", 0x02, "Misc_Technical"),
    c(0x23AA, None, "CURLY BRACKET EXTENSION", 0x02, "Misc_Technical"),
    c(0x23AB, None, "RIGHT CURLY BRACKET UPPER HOOK", 0x02, "Misc_Technical"),
    c(0x23AC, None, "RIGHT CURLY BRACKET MIDDLE PIECE", 0x02, "Misc_Technical"),
    c(0x23AD, None, "RIGHT CURLY BRACKET LOWER HOOK", 0x02, "Misc_Technical"),
    c(0x23AE, None, "INTEGRAL EXTENSION", 0x02, "Misc_Technical"),
    c(0x23AF, None, "HORIZONTAL LINE EXTENSION", 0x02, "Misc_Technical"),
    c(0x23B0, None, "UPPER LEFT OR LOWER RIGHT CURLY BRACKET SECTION", 0x02, "Misc_Technical"),
    c(0x23B1, None, "UPPER RIGHT OR LOWER LEFT CURLY BRACKET SECTION", 0x02, "Misc_Technical"),
    c(0x23B2, None, "SUMMATION TOP", 0x02, "Misc_Technical"),
    c(0x23B3, None, "SUMMATION BOTTOM", 0x02, "Misc_Technical"),
    c(0x23B4, None, "TOP SQUARE BRACKET", 0x02, "Misc_Technical"),
    c(0x23B5, None, "BOTTOM SQUARE BRACKET", 0x02, "Misc_Technical"),
    c(0x23B6, None, "BOTTOM SQUARE BRACKET OVER TOP SQUARE BRACKET", 0x00, "Misc_Technical"),
    c(0x23B7, None, "RADICAL SYMBOL BOTTOM", 0x02, "Misc_Technical"),
    c(0x23B8, None, "LEFT VERTICAL BOX LINE", 0x00, "Misc_Technical"),
    c(0x23B9, None, "RIGHT VERTICAL BOX LINE", 0x00, "Misc_Technical"),
    c(0x23BA, None, "HORIZONTAL SCAN LINE-1", 0x00, "Misc_Technical"),
    c(0x23BB, None, "HORIZONTAL SCAN LINE-3", 0x00, "Misc_Technical"),
    c(0x23BC, None, "HORIZONTAL SCAN LINE-7", 0x00, "Misc_Technical"),
    c(0x23BD, None, "HORIZONTAL SCAN LINE-9", 0x00, "Misc_Technical"),
    c(0x23BE, None, "DENTISTRY SYMBOL LIGHT VERTICAL AND TOP RIGHT", 0x00, "Misc_Technical"),
    c(0x23BF, None, "DENTISTRY SYMBOL LIGHT VERTICAL AND BOTTOM RIGHT", 0x00, "Misc_Technical"),
    c(0x23C0, None, "DENTISTRY SYMBOL LIGHT VERTICAL WITH CIRCLE", 0x00, "Misc_Technical"),
    c(0x23C1, None, "DENTISTRY SYMBOL LIGHT DOWN AND HORIZONTAL WITH CIRCLE", 0x00, "Misc_Technical"),
    c(0x23C2, None, "DENTISTRY SYMBOL LIGHT UP AND HORIZONTAL WITH CIRCLE", 0x00, "Misc_Technical"),
    c(0x23C3, None, "DENTISTRY SYMBOL LIGHT VERTICAL WITH TRIANGLE", 0x00, "Misc_Technical"),
    c(0x23C4, None, "DENTISTRY SYMBOL LIGHT DOWN AND HORIZONTAL WITH TRIANGLE", 0x00, "Misc_Technical"),
    c(0x23C5, None, "DENTISTRY SYMBOL LIGHT UP AND HORIZONTAL WITH TRIANGLE", 0x00, "Misc_Technical"),
    c(0x23C6, None, "DENTISTRY SYMBOL LIGHT VERTICAL AND WAVE", 0x00, "Misc_Technical"),
    c(0x23C7, None, "DENTISTRY SYMBOL LIGHT DOWN AND HORIZONTAL WITH WAVE", 0x00, "Misc_Technical"),
    c(0x23C8, None, "DENTISTRY SYMBOL LIGHT UP AND HORIZONTAL WITH WAVE", 0x00, "Misc_Technical"),
    c(0x23C9, None, "DENTISTRY SYMBOL LIGHT DOWN AND HORIZONTAL", 0x00, "Misc_Technical"),
    c(0x23CA, None, "DENTISTRY SYMBOL LIGHT UP AND HORIZONTAL", 0x00, "Misc_Technical"),
    c(0x23CB, None, "DENTISTRY SYMBOL LIGHT VERTICAL AND TOP LEFT", 0x00, "Misc_Technical"),
    c(0x23CC, None, "DENTISTRY SYMBOL LIGHT VERTICAL AND BOTTOM LEFT", 0x00, "Misc_Technical"),
    c(0x23CD, None, "SQUARE FOOT", 0x00, "Misc_Technical"),
    c(0x23CE, None, "RETURN SYMBOL", 0x00, "Misc_Technical"),
    c(0x23CF, None, "EJECT SYMBOL", 0x00, "Misc_Technical"),
    c(0x23D0, None, "VERTICAL LINE EXTENSION", 0x02, "Misc_Technical"),
    c(0x23D1, None, "METRICAL BREVE", 0x00, "Misc_Technical"),
    c(0x23D2, None, "METRICAL LONG OVER SHORT", 0x00, "Misc_Technical"),
    c(0x23D3, None, "METRICAL SHORT OVER LONG", 0x00, "Misc_Technical"),
    c(0x23D4, None, "METRICAL LONG OVER TWO SHORTS", 0x00, "Misc_Technical"),
    c(0x23D5, None, "METRICAL TWO SHORTS OVER LONG", 0x00, "Misc_Technical"),
    c(0x23D6, None, "METRICAL TWO SHORTS JOINED", 0x00, "Misc_Technical"),
    c(0x23D7, None, "METRICAL TRISEME", 0x00, "Misc_Technical"),
    c(0x23D8, None, "METRICAL TETRASEME", 0x00, "Misc_Technical"),
    c(0x23D9, None, "METRICAL PENTASEME", 0x00, "Misc_Technical"),
    c(0x23DA, None, "EARTH GROUND", 0x00, "Misc_Technical"),
    c(0x23DB, None, "FUSE", 0x00, "Misc_Technical"),
    c(0x23DC, None, "TOP PARENTHESIS", 0x02, "Misc_Technical"),
    c(0x23DD, None, "BOTTOM PARENTHESIS", 0x02, "Misc_Technical"),
    c(0x23DE, None, "TOP CURLY BRACKET", 0x02, "Misc_Technical"),
    c(0x23DF, None, "BOTTOM CURLY BRACKET", 0x02, "Misc_Technical"),
    c(0x23E0, None, "TOP TORTOISE SHELL BRACKET", 0x02, "Misc_Technical"),
    c(0x23E1, None, "BOTTOM TORTOISE SHELL BRACKET", 0x02, "Misc_Technical"),
    c(0x23E2, None, "WHITE TRAPEZIUM", 0x02, "Misc_Technical"),
    c(0x23E3, None, "BENZENE RING WITH CIRCLE", 0x00, "Misc_Technical"),
    c(0x23E4, None, "STRAIGHTNESS", 0x00, "Misc_Technical"),
    c(0x23E5, None, "FLATNESS", 0x00, "Misc_Technical"),
    c(0x23E6, None, "AC CURRENT", 0x00, "Misc_Technical"),
    c(0x23E7, None, "ELECTRICAL INTERSECTION", 0x00, "Misc_Technical"),
    c(0x23E8, None, "DECIMAL EXPONENT SYMBOL", 0x00, "Misc_Technical"),
    c(0x23E9, None, "BLACK RIGHT-POINTING DOUBLE TRIANGLE", 0x00, "Misc_Technical"),
    c(0x23EA, None, "BLACK LEFT-POINTING DOUBLE TRIANGLE", 0x00, "Misc_Technical"),
    c(0x23EB, None, "BLACK UP-POINTING DOUBLE TRIANGLE", 0x00, "Misc_Technical"),
    c(0x23EC, None, "BLACK DOWN-POINTING DOUBLE TRIANGLE", 0x00, "Misc_Technical"),
    c(0x23ED, None, "BLACK RIGHT-POINTING DOUBLE TRIANGLE WITH VERTICAL BAR", 0x00, "Misc_Technical"),
    c(0x23EE, None, "BLACK LEFT-POINTING DOUBLE TRIANGLE WITH VERTICAL BAR", 0x00, "Misc_Technical"),
    c(0x23EF, None, "BLACK RIGHT-POINTING TRIANGLE WITH DOUBLE VERTICAL BAR", 0x00, "Misc_Technical"),
    c(0x23F0, None, "ALARM CLOCK", 0x00, "Misc_Technical"),
    c(0x23F1, None, "STOPWATCH", 0x00, "Misc_Technical"),
    c(0x23F2, None, "TIMER CLOCK", 0x00, "Misc_Technical"),
    c(0x23F3, None, "HOURGLASS WITH FLOWING SAND", 0x00, "Misc_Technical"),
    c(0x23F4, None, "BLACK MEDIUM LEFT-POINTING TRIANGLE", 0x00, "Misc_Technical"),
    c(0x23F5, None, "BLACK MEDIUM RIGHT-POINTING TRIANGLE", 0x00, "Misc_Technical"),
    c(0x23F6, None, "BLACK MEDIUM UP-POINTING TRIANGLE", 0x00, "Misc_Technical"),
    c(0x23F7, None, "BLACK MEDIUM DOWN-POINTING TRIANGLE", 0x00, "Misc_Technical"),
    c(0x23F8, None, "DOUBLE VERTICAL BAR", 0x00, "Misc_Technical"),
    c(0x23F9, None, "BLACK SQUARE FOR STOP", 0x00, "Misc_Technical"),
    c(0x23FA, None, "BLACK CIRCLE FOR RECORD", 0x00, "Misc_Technical"),
    c(0x23FB, None, "POWER SYMBOL", 0x00, "Misc_Technical"),
    c(0x23FC, None, "POWER ON-OFF SYMBOL", 0x00, "Misc_Technical"),
    c(0x23FD, None, "POWER ON SYMBOL", 0x00, "Misc_Technical"),
    c(0x23FE, None, "POWER SLEEP SYMBOL", 0x00, "Misc_Technical"),
    c(0x23FF, None, "OBSERVER EYE SYMBOL", 0x00, "Misc_Technical"),
    c(0x2400, None, "SYMBOL FOR NULL", 0x00, "Control_Pictures"),
    c(0x2401, None, "SYMBOL FOR START OF HEADING", 0x00, "Control_Pictures"),
    c(0x2402, None, "SYMBOL FOR START OF TEXT", 0x00, "Control_Pictures"),
    c(0x2403, None, "SYMBOL FOR END OF TEXT", 0x00, "Control_Pictures"),
    c(0x2404, None, "SYMBOL FOR END OF TRANSMISSION", 0x00, "Control_Pictures"),
    c(0x2405, None, "SYMBOL FOR ENQUIRY", 0x00, "Control_Pictures"),
    c(0x2406, None, "SYMBOL FOR ACKNOWLEDGE", 0x00, "Control_Pictures"),
    c(0x2407, None, "SYMBOL FOR BELL", 0x00, "Control_Pictures"),
    c(0x2408, None, "SYMBOL FOR BACKSPACE", 0x00, "Control_Pictures"),
    c(0x2409, None, "SYMBOL FOR HORIZONTAL TABULATION", 0x00, "Control_Pictures"),
    c(0x240A, None, "SYMBOL FOR LINE FEED", 0x00, "Control_Pictures"),
    c(0x240B, None, "SYMBOL FOR VERTICAL TABULATION", 0x00, "Control_Pictures"),
    c(0x240C, None, "SYMBOL FOR FORM FEED", 0x00, "Control_Pictures"),
    c(0x240D, None, "SYMBOL FOR CARRIAGE RETURN", 0x00, "Control_Pictures"),
    c(0x240E, None, "SYMBOL FOR SHIFT OUT", 0x00, "Control_Pictures"),
    c(0x240F, None, "SYMBOL FOR SHIFT IN", 0x00, "Control_Pictures"),
    c(0x2410, None, "SYMBOL FOR DATA LINK ESCAPE", 0x00, "Control_Pictures"),
    c(0x2411, None, "SYMBOL FOR DEVICE CONTROL ONE", 0x00, "Control_Pictures"),
    c(0x2412, None, "SYMBOL FOR DEVICE CONTROL TWO", 0x00, "Control_Pictures"),
    c(0x2413, None, "SYMBOL FOR DEVICE CONTROL THREE", 0x00, "Control_Pictures"),
    c(0x2414, None, "SYMBOL FOR DEVICE CONTROL FOUR", 0x00, "Control_Pictures"),
    c(0x2415, None, "SYMBOL FOR NEGATIVE ACKNOWLEDGE", 0x00, "Control_Pictures"),
    c(0x2416, None, "SYMBOL FOR SYNCHRONOUS IDLE", 0x00, "Control_Pictures"),
    c(0x2417, None, "SYMBOL FOR END OF TRANSMISSION BLOCK", 0x00, "Control_Pictures"),
    c(0x2418, None, "SYMBOL FOR CANCEL", 0x00, "Control_Pictures"),
    c(0x2419, None, "SYMBOL FOR END OF MEDIUM", 0x00, "Control_Pictures"),
    c(0x241A, None, "SYMBOL FOR SUBSTITUTE", 0x00, "Control_Pictures"),
    c(0x241B, None, "SYMBOL FOR ESCAPE", 0x00, "Control_Pictures"),
    c(0x241C, None, "SYMBOL FOR FILE SEPARATOR", 0x00, "Control_Pictures"),
    c(0x241D, None, "SYMBOL FOR GROUP SEPARATOR", 0x00, "Control_Pictures"),
    c(0x241E, None, "SYMBOL FOR RECORD SEPARATOR", 0x00, "Control_Pictures"),
    c(0x241F, None, "SYMBOL FOR UNIT SEPARATOR", 0x00, "Control_Pictures"),
    c(0x2420, None, "SYMBOL FOR SPACE", 0x00, "Control_Pictures"),
    c(0x2421, None, "SYMBOL FOR DELETE", 0x00, "Control_Pictures"),
    c(0x2422, None, "BLANK SYMBOL", 0x00, "Control_Pictures"),
    c(0x2423, None, "OPEN BOX", 0x00, "Control_Pictures"),
    c(0x2424, None, "SYMBOL FOR NEWLINE", 0x00, "Control_Pictures"),
    c(0x2425, None, "SYMBOL FOR DELETE FORM TWO", 0x00, "Control_Pictures"),
    c(0x2426, None, "SYMBOL FOR SUBSTITUTE FORM TWO", 0x00, "Control_Pictures"),
    c(0x2440, None, "OCR HOOK", 0x00, "OCR"),
    c(0x2441, None, "OCR CHAIR", 0x00, "OCR"),
    c(0x2442, None, "OCR FORK", 0x00, "OCR"),
    c(0x2443, None, "OCR INVERTED FORK", 0x00, "OCR"),
    c(0x2444, None, "OCR BELT BUCKLE", 0x00, "OCR"),
    c(0x2445, None, "OCR BOW TIE", 0x00, "OCR"),
    c(0x2446, None, "OCR BRANCH BANK IDENTIFICATION", 0x00, "OCR"),
    c(0x2447, None, "OCR AMOUNT OF CHECK", 0x00, "OCR"),
    c(0x2448, None, "MICR ON US SYMBOL", 0x00, "OCR"),
    c(0x2449, None, "MICR DASH SYMBOL", 0x00, "OCR"),
    c(0x244A, None, "OCR DOUBLE BACKSLASH", 0x00, "OCR"),
    c(0x2460, None, "CIRCLED DIGIT ONE", 0x00, "Enclosed_Alphanum"),
    c(0x2461, None, "CIRCLED DIGIT TWO", 0x00, "Enclosed_Alphanum"),
    c(0x2462, None, "CIRCLED DIGIT THREE", 0x00, "Enclosed_Alphanum"),
    c(0x2463, None, "CIRCLED DIGIT FOUR", 0x00, "Enclosed_Alphanum"),
    c(0x2464, None, "CIRCLED DIGIT FIVE", 0x00, "Enclosed_Alphanum"),
    c(0x2465, None, "CIRCLED DIGIT SIX", 0x00, "Enclosed_Alphanum"),
    c(0x2466, None, "CIRCLED DIGIT SEVEN", 0x00, "Enclosed_Alphanum"),
    c(0x2467, None, "CIRCLED DIGIT EIGHT", 0x00, "Enclosed_Alphanum"),
    c(0x2468, None, "CIRCLED DIGIT NINE", 0x00, "Enclosed_Alphanum"),
    c(0x2469, None, "CIRCLED NUMBER TEN", 0x00, "Enclosed_Alphanum"),
    c(0x246A, None, "CIRCLED NUMBER ELEVEN", 0x00, "Enclosed_Alphanum"),
    c(0x246B, None, "CIRCLED NUMBER TWELVE", 0x00, "Enclosed_Alphanum"),
    c(0x246C, None, "CIRCLED NUMBER THIRTEEN", 0x00, "Enclosed_Alphanum"),
    c(0x246D, None, "CIRCLED NUMBER FOURTEEN", 0x00, "Enclosed_Alphanum"),
    c(0x246E, None, "CIRCLED NUMBER FIFTEEN", 0x00, "Enclosed_Alphanum"),
    c(0x246F, None, "CIRCLED NUMBER SIXTEEN", 0x00, "Enclosed_Alphanum"),
    c(0x2470, None, "CIRCLED NUMBER SEVENTEEN", 0x00, "Enclosed_Alphanum"),
    c(0x2471, None, "CIRCLED NUMBER EIGHTEEN", 0x00, "Enclosed_Alphanum"),
    c(0x2472, None, "CIRCLED NUMBER NINETEEN", 0x00, "Enclosed_Alphanum"),
    c(0x2473, None, "CIRCLED NUMBER TWENTY", 0x00, "Enclosed_Alphanum"),
    c(0x2474, None, "PARENTHESIZED DIGIT ONE", 0x00, "Enclosed_Alphanum"),
    c(0x2475, None, "PARENTHESIZED DIGIT TWO", 0x00, "Enclosed_Alphanum"),
    c(0x2476, None, "PARENTHESIZED DIGIT THREE", 0x00, "Enclosed_Alphanum"),
    c(0x2477, None, "PARENTHESIZED DIGIT FOUR", 0x00, "Enclosed_Alphanum"),
    c(0x2478, None, "PARENTHESIZED DIGIT FIVE", 0x00, "Enclosed_Alphanum"),
    c(0x2479, None, "PARENTHESIZED DIGIT SIX", 0x00, "Enclosed_Alphanum"),
    c(0x247A, None, "PARENTHESIZED DIGIT SEVEN", 0x00, "Enclosed_Alphanum"),
    c(0x247B, None, "PARENTHESIZED DIGIT EIGHT", 0x00, "Enclosed_Alphanum"),
    c(0x247C, None, "PARENTHESIZED DIGIT NINE", 0x00, "Enclosed_Alphanum"),
    c(0x247D, None, "PARENTHESIZED NUMBER TEN", 0x00, "Enclosed_Alphanum"),
    c(0x247E, None, "PARENTHESIZED NUMBER ELEVEN", 0x00, "Enclosed_Alphanum"),
    c(0x247F, None, "PARENTHESIZED NUMBER TWELVE", 0x00, "Enclosed_Alphanum"),
    c(0x2480, None, "PARENTHESIZED NUMBER THIRTEEN", 0x00, "Enclosed_Alphanum"),
    c(0x2481, None, "PARENTHESIZED NUMBER FOURTEEN", 0x00, "Enclosed_Alphanum"),
    c(0x2482, None, "PARENTHESIZED NUMBER FIFTEEN", 0x00, "Enclosed_Alphanum"),
    c(0x2483, None, "PARENTHESIZED NUMBER SIXTEEN", 0x00, "Enclosed_Alphanum"),
    c(0x2484, None, "PARENTHESIZED NUMBER SEVENTEEN", 0x00, "Enclosed_Alphanum"),
    c(0x2485, None, "PARENTHESIZED NUMBER EIGHTEEN", 0x00, "Enclosed_Alphanum"),
    c(0x2486, None, "PARENTHESIZED NUMBER NINETEEN", 0x00, "Enclosed_Alphanum"),
    c(0x2487, None, "PARENTHESIZED NUMBER TWENTY", 0x00, "Enclosed_Alphanum"),
    c(0x2488, None, "DIGIT ONE FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x2489, None, "DIGIT TWO FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x248A, None, "DIGIT THREE FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x248B, None, "DIGIT FOUR FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x248C, None, "DIGIT FIVE FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x248D, None, "DIGIT SIX FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x248E, None, "DIGIT SEVEN FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x248F, None, "DIGIT EIGHT FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x2490, None, "DIGIT NINE FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x2491, None, "NUMBER TEN FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x2492, None, "NUMBER ELEVEN FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x2493, None, "NUMBER TWELVE FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x2494, None, "NUMBER THIRTEEN FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x2495, None, "NUMBER FOURTEEN FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x2496, None, "NUMBER FIFTEEN FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x2497, None, "NUMBER SIXTEEN FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x2498, None, "NUMBER SEVENTEEN FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x2499, None, "NUMBER EIGHTEEN FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x249A, None, "NUMBER NINETEEN FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x249B, None, "NUMBER TWENTY FULL STOP", 0x00, "Enclosed_Alphanum"),
    c(0x249C, None, "PARENTHESIZED LATIN SMALL LETTER A", 0x00, "Enclosed_Alphanum"),
    c(0x249D, None, "PARENTHESIZED LATIN SMALL LETTER B", 0x00, "Enclosed_Alphanum"),
    c(0x249E, None, "PARENTHESIZED LATIN SMALL LETTER C", 0x00, "Enclosed_Alphanum"),
    c(0x249F, None, "PARENTHESIZED LATIN SMALL LETTER D", 0x00, "Enclosed_Alphanum"),
    c(0x24A0, None, "PARENTHESIZED LATIN SMALL LETTER E", 0x00, "Enclosed_Alphanum"),
    c(0x24A1, None, "PARENTHESIZED LATIN SMALL LETTER F", 0x00, "Enclosed_Alphanum"),
    c(0x24A2, None, "PARENTHESIZED LATIN SMALL LETTER G", 0x00, "Enclosed_Alphanum"),
    c(0x24A3, None, "PARENTHESIZED LATIN SMALL LETTER H", 0x00, "Enclosed_Alphanum"),
    c(0x24A4, None, "PARENTHESIZED LATIN SMALL LETTER I", 0x00, "Enclosed_Alphanum"),
    c(0x24A5, None, "PARENTHESIZED LATIN SMALL LETTER J", 0x00, "Enclosed_Alphanum"),
    c(0x24A6, None, "PARENTHESIZED LATIN SMALL LETTER K", 0x00, "Enclosed_Alphanum"),
    c(0x24A7, None, "PARENTHESIZED LATIN SMALL LETTER L", 0x00, "Enclosed_Alphanum"),
    c(0x24A8, None, "PARENTHESIZED LATIN SMALL LETTER M", 0x00, "Enclosed_Alphanum"),
    c(0x24A9, None, "PARENTHESIZED LATIN SMALL LETTER N", 0x00, "Enclosed_Alphanum"),
    c(0x24AA, None, "PARENTHESIZED LATIN SMALL LETTER O", 0x00, "Enclosed_Alphanum"),
    c(0x24AB, None, "PARENTHESIZED LATIN SMALL LETTER P", 0x00, "Enclosed_Alphanum"),
    c(0x24AC, None, "PARENTHESIZED LATIN SMALL LETTER Q", 0x00, "Enclosed_Alphanum"),
    c(0x24AD, None, "PARENTHESIZED LATIN SMALL LETTER R", 0x00, "Enclosed_Alphanum"),
    c(0x24AE, None, "PARENTHESIZED LATIN SMALL LETTER S", 0x00, "Enclosed_Alphanum"),
    c(0x24AF, None, "PARENTHESIZED LATIN SMALL LETTER T", 0x00, "Enclosed_Alphanum"),
    c(0x24B0, None, "PARENTHESIZED LATIN SMALL LETTER U", 0x00, "Enclosed_Alphanum"),
    c(0x24B1, None, "PARENTHESIZED LATIN SMALL LETTER V", 0x00, "Enclosed_Alphanum"),
    c(0x24B2, None, "PARENTHESIZED LATIN SMALL LETTER W", 0x00, "Enclosed_Alphanum"),
    c(0x24B3, None, "PARENTHESIZED LATIN SMALL LETTER X", 0x00, "Enclosed_Alphanum"),
    c(0x24B4, None, "PARENTHESIZED LATIN SMALL LETTER Y", 0x00, "Enclosed_Alphanum"),
    c(0x24B5, None, "PARENTHESIZED LATIN SMALL LETTER Z", 0x00, "Enclosed_Alphanum"),
    c(0x24B6, None, "CIRCLED LATIN CAPITAL LETTER A", 0x01, "Enclosed_Alphanum"),
    c(0x24B7, None, "CIRCLED LATIN CAPITAL LETTER B", 0x01, "Enclosed_Alphanum"),
    c(0x24B8, None, "CIRCLED LATIN CAPITAL LETTER C", 0x01, "Enclosed_Alphanum"),
    c(0x24B9, None, "CIRCLED LATIN CAPITAL LETTER D", 0x01, "Enclosed_Alphanum"),
    c(0x24BA, None, "CIRCLED LATIN CAPITAL LETTER E", 0x01, "Enclosed_Alphanum"),
    c(0x24BB, None, "CIRCLED LATIN CAPITAL LETTER F", 0x01, "Enclosed_Alphanum"),
    c(0x24BC, None, "CIRCLED LATIN CAPITAL LETTER G", 0x01, "Enclosed_Alphanum"),
    c(0x24BD, None, "CIRCLED LATIN CAPITAL LETTER H", 0x01, "Enclosed_Alphanum"),
    c(0x24BE, None, "CIRCLED LATIN CAPITAL LETTER I", 0x01, "Enclosed_Alphanum"),
    c(0x24BF, None, "CIRCLED LATIN CAPITAL LETTER J", 0x01, "Enclosed_Alphanum"),
    c(0x24C0, None, "CIRCLED LATIN CAPITAL LETTER K", 0x01, "Enclosed_Alphanum"),
    c(0x24C1, None, "CIRCLED LATIN CAPITAL LETTER L", 0x01, "Enclosed_Alphanum"),
    c(0x24C2, None, "CIRCLED LATIN CAPITAL LETTER M", 0x01, "Enclosed_Alphanum"),
    c(0x24C3, None, "CIRCLED LATIN CAPITAL LETTER N", 0x01, "Enclosed_Alphanum"),
    c(0x24C4, None, "CIRCLED LATIN CAPITAL LETTER O", 0x01, "Enclosed_Alphanum"),
    c(0x24C5, None, "CIRCLED LATIN CAPITAL LETTER P", 0x01, "Enclosed_Alphanum"),
    c(0x24C6, None, "CIRCLED LATIN CAPITAL LETTER Q", 0x01, "Enclosed_Alphanum"),
    c(0x24C7, None, "CIRCLED LATIN CAPITAL LETTER R", 0x01, "Enclosed_Alphanum"),
    c(0x24C8, None, "CIRCLED LATIN CAPITAL LETTER S", 0x01, "Enclosed_Alphanum"),
    c(0x24C9, None, "CIRCLED LATIN CAPITAL LETTER T", 0x01, "Enclosed_Alphanum"),
    c(0x24CA, None, "CIRCLED LATIN CAPITAL LETTER U", 0x01, "Enclosed_Alphanum"),
    c(0x24CB, None, "CIRCLED LATIN CAPITAL LETTER V", 0x01, "Enclosed_Alphanum"),
    c(0x24CC, None, "CIRCLED LATIN CAPITAL LETTER W", 0x01, "Enclosed_Alphanum"),
    c(0x24CD, None, "CIRCLED LATIN CAPITAL LETTER X", 0x01, "Enclosed_Alphanum"),
    c(0x24CE, None, "CIRCLED LATIN CAPITAL LETTER Y", 0x01, "Enclosed_Alphanum"),
    c(0x24CF, None, "CIRCLED LATIN CAPITAL LETTER Z", 0x01, "Enclosed_Alphanum"),
    c(0x24D0, None, "CIRCLED LATIN SMALL LETTER A", 0x01, "Enclosed_Alphanum"),
    c(0x24D1, None, "CIRCLED LATIN SMALL LETTER B", 0x01, "Enclosed_Alphanum"),
    c(0x24D2, None, "CIRCLED LATIN SMALL LETTER C", 0x01, "Enclosed_Alphanum"),
    c(0x24D3, None, "CIRCLED LATIN SMALL LETTER D", 0x01, "Enclosed_Alphanum"),
    c(0x24D4, None, "CIRCLED LATIN SMALL LETTER E", 0x01, "Enclosed_Alphanum"),
    c(0x24D5, None, "CIRCLED LATIN SMALL LETTER F", 0x01, "Enclosed_Alphanum"),
    c(0x24D6, None, "CIRCLED LATIN SMALL LETTER G", 0x01, "Enclosed_Alphanum"),
    c(0x24D7, None, "CIRCLED LATIN SMALL LETTER H", 0x01, "Enclosed_Alphanum"),
    c(0x24D8, None, "CIRCLED LATIN SMALL LETTER I", 0x01, "Enclosed_Alphanum"),
    c(0x24D9, None, "CIRCLED LATIN SMALL LETTER J", 0x01, "Enclosed_Alphanum"),
    c(0x24DA, None, "CIRCLED LATIN SMALL LETTER K", 0x01, "Enclosed_Alphanum"),
    c(0x24DB, None, "CIRCLED LATIN SMALL LETTER L", 0x01, "Enclosed_Alphanum"),
    c(0x24DC, None, "CIRCLED LATIN SMALL LETTER M", 0x01, "Enclosed_Alphanum"),
    c(0x24DD, None, "CIRCLED LATIN SMALL LETTER N", 0x01, "Enclosed_Alphanum"),
    c(0x24DE, None, "CIRCLED LATIN SMALL LETTER O", 0x01, "Enclosed_Alphanum"),
    c(0x24DF, None, "CIRCLED LATIN SMALL LETTER P", 0x01, "Enclosed_Alphanum"),
    c(0x24E0, None, "CIRCLED LATIN SMALL LETTER Q", 0x01, "Enclosed_Alphanum"),
    c(0x24E1, None, "CIRCLED LATIN SMALL LETTER R", 0x01, "Enclosed_Alphanum"),
    c(0x24E2, None, "CIRCLED LATIN SMALL LETTER S", 0x01, "Enclosed_Alphanum"),
    c(0x24E3, None, "CIRCLED LATIN SMALL LETTER T", 0x01, "Enclosed_Alphanum"),
    c(0x24E4, None, "CIRCLED LATIN SMALL LETTER U", 0x01, "Enclosed_Alphanum"),
    c(0x24E5, None, "CIRCLED LATIN SMALL LETTER V", 0x01, "Enclosed_Alphanum"),
    c(0x24E6, None, "CIRCLED LATIN SMALL LETTER W", 0x01, "Enclosed_Alphanum"),
    c(0x24E7, None, "CIRCLED LATIN SMALL LETTER X", 0x01, "Enclosed_Alphanum"),
    c(0x24E8, None, "CIRCLED LATIN SMALL LETTER Y", 0x01, "Enclosed_Alphanum"),
    c(0x24E9, None, "CIRCLED LATIN SMALL LETTER Z", 0x01, "Enclosed_Alphanum"),
    c(0x24EA, None, "CIRCLED DIGIT ZERO", 0x00, "Enclosed_Alphanum"),
    c(0x24EB, None, "NEGATIVE CIRCLED NUMBER ELEVEN", 0x00, "Enclosed_Alphanum"),
    c(0x24EC, None, "NEGATIVE CIRCLED NUMBER TWELVE", 0x00, "Enclosed_Alphanum"),
    c(0x24ED, None, "NEGATIVE CIRCLED NUMBER THIRTEEN", 0x00, "Enclosed_Alphanum"),
    c(0x24EE, None, "NEGATIVE CIRCLED NUMBER FOURTEEN", 0x00, "Enclosed_Alphanum"),
    c(0x24EF, None, "NEGATIVE CIRCLED NUMBER FIFTEEN", 0x00, "Enclosed_Alphanum"),
    c(0x24F0, None, "NEGATIVE CIRCLED NUMBER SIXTEEN", 0x00, "Enclosed_Alphanum"),
    c(0x24F1, None, "NEGATIVE CIRCLED NUMBER SEVENTEEN", 0x00, "Enclosed_Alphanum"),
    c(0x24F2, None, "NEGATIVE CIRCLED NUMBER EIGHTEEN", 0x00, "Enclosed_Alphanum"),
    c(0x24F3, None, "NEGATIVE CIRCLED NUMBER NINETEEN", 0x00, "Enclosed_Alphanum"),
    c(0x24F4, None, "NEGATIVE CIRCLED NUMBER TWENTY", 0x00, "Enclosed_Alphanum"),
    c(0x24F5, None, "DOUBLE CIRCLED DIGIT ONE", 0x00, "Enclosed_Alphanum"),
    c(0x24F6, None, "DOUBLE CIRCLED DIGIT TWO", 0x00, "Enclosed_Alphanum"),
    c(0x24F7, None, "DOUBLE CIRCLED DIGIT THREE", 0x00, "Enclosed_Alphanum"),
    c(0x24F8, None, "DOUBLE CIRCLED DIGIT FOUR", 0x00, "Enclosed_Alphanum"),
    c(0x24F9, None, "DOUBLE CIRCLED DIGIT FIVE", 0x00, "Enclosed_Alphanum"),
    c(0x24FA, None, "DOUBLE CIRCLED DIGIT SIX", 0x00, "Enclosed_Alphanum"),
    c(0x24FB, None, "DOUBLE CIRCLED DIGIT SEVEN", 0x00, "Enclosed_Alphanum"),
    c(0x24FC, None, "DOUBLE CIRCLED DIGIT EIGHT", 0x00, "Enclosed_Alphanum"),
    c(0x24FD, None, "DOUBLE CIRCLED DIGIT NINE", 0x00, "Enclosed_Alphanum"),
    c(0x24FE, None, "DOUBLE CIRCLED NUMBER TEN", 0x00, "Enclosed_Alphanum"),
    c(0x24FF, None, "NEGATIVE CIRCLED DIGIT ZERO", 0x00, "Enclosed_Alphanum"),
    c(0x2500, None, "BOX DRAWINGS LIGHT HORIZONTAL", 0x00, "Box_Drawing"),
    c(0x2501, None, "BOX DRAWINGS HEAVY HORIZONTAL", 0x00, "Box_Drawing"),
    c(0x2502, None, "BOX DRAWINGS LIGHT VERTICAL", 0x00, "Box_Drawing"),
    c(0x2503, None, "BOX DRAWINGS HEAVY VERTICAL", 0x00, "Box_Drawing"),
    c(0x2504, None, "BOX DRAWINGS LIGHT TRIPLE DASH HORIZONTAL", 0x00, "Box_Drawing"),
    c(0x2505, None, "BOX DRAWINGS HEAVY TRIPLE DASH HORIZONTAL", 0x00, "Box_Drawing"),
    c(0x2506, None, "BOX DRAWINGS LIGHT TRIPLE DASH VERTICAL", 0x00, "Box_Drawing"),
    c(0x2507, None, "BOX DRAWINGS HEAVY TRIPLE DASH VERTICAL", 0x00, "Box_Drawing"),
    c(0x2508, None, "BOX DRAWINGS LIGHT QUADRUPLE DASH HORIZONTAL", 0x00, "Box_Drawing"),
    c(0x2509, None, "BOX DRAWINGS HEAVY QUADRUPLE DASH HORIZONTAL", 0x00, "Box_Drawing"),
    c(0x250A, None, "BOX DRAWINGS LIGHT QUADRUPLE DASH VERTICAL", 0x00, "Box_Drawing"),
    c(0x250B, None, "BOX DRAWINGS HEAVY QUADRUPLE DASH VERTICAL", 0x00, "Box_Drawing"),
    c(0x250C, None, "BOX DRAWINGS LIGHT DOWN AND RIGHT", 0x00, "Box_Drawing"),
    c(0x250D, None, "BOX DRAWINGS DOWN LIGHT AND RIGHT HEAVY", 0x00, "Box_Drawing"),
    c(0x250E, None, "BOX DRAWINGS DOWN HEAVY AND RIGHT LIGHT", 0x00, "Box_Drawing"),
    c(0x250F, None, "BOX DRAWINGS HEAVY DOWN AND RIGHT", 0x00, "Box_Drawing"),
    c(0x2510, None, "BOX DRAWINGS LIGHT DOWN AND LEFT", 0x00, "Box_Drawing"),
    c(0x2511, None, "BOX DRAWINGS DOWN LIGHT AND LEFT HEAVY", 0x00, "Box_Drawing"),
    c(0x2512, None, "BOX DRAWINGS DOWN HEAVY AND LEFT LIGHT", 0x00, "Box_Drawing"),
    c(0x2513, None, "BOX DRAWINGS HEAVY DOWN AND LEFT", 0x00, "Box_Drawing"),
    c(0x2514, None, "BOX DRAWINGS LIGHT UP AND RIGHT", 0x00, "Box_Drawing"),
    c(0x2515, None, "BOX DRAWINGS UP LIGHT AND RIGHT HEAVY", 0x00, "Box_Drawing"),
    c(0x2516, None, "BOX DRAWINGS UP HEAVY AND RIGHT LIGHT", 0x00, "Box_Drawing"),
    c(0x2517, None, "BOX DRAWINGS HEAVY UP AND RIGHT", 0x00, "Box_Drawing"),
    c(0x2518, None, "BOX DRAWINGS LIGHT UP AND LEFT", 0x00, "Box_Drawing"),
    c(0x2519, None, "BOX DRAWINGS UP LIGHT AND LEFT HEAVY", 0x00, "Box_Drawing"),
    c(0x251A, None, "BOX DRAWINGS UP HEAVY AND LEFT LIGHT", 0x00, "Box_Drawing"),
    c(0x251B, None, "BOX DRAWINGS HEAVY UP AND LEFT", 0x00, "Box_Drawing"),
    c(0x251C, None, "BOX DRAWINGS LIGHT VERTICAL AND RIGHT", 0x00, "Box_Drawing"),
    c(0x251D, None, "BOX DRAWINGS VERTICAL LIGHT AND RIGHT HEAVY", 0x00, "Box_Drawing"),
    c(0x251E, None, "BOX DRAWINGS UP HEAVY AND RIGHT DOWN LIGHT", 0x00, "Box_Drawing"),
    c(0x251F, None, "BOX DRAWINGS DOWN HEAVY AND RIGHT UP LIGHT", 0x00, "Box_Drawing"),
    c(0x2520, None, "BOX DRAWINGS VERTICAL HEAVY AND RIGHT LIGHT", 0x00, "Box_Drawing"),
    c(0x2521, None, "BOX DRAWINGS DOWN LIGHT AND RIGHT UP HEAVY", 0x00, "Box_Drawing"),
    c(0x2522, None, "BOX DRAWINGS UP LIGHT AND RIGHT DOWN HEAVY", 0x00, "Box_Drawing"),
    c(0x2523, None, "BOX DRAWINGS HEAVY VERTICAL AND RIGHT", 0x00, "Box_Drawing"),
    c(0x2524, None, "BOX DRAWINGS LIGHT VERTICAL AND LEFT", 0x00, "Box_Drawing"),
    c(0x2525, None, "BOX DRAWINGS VERTICAL LIGHT AND LEFT HEAVY", 0x00, "Box_Drawing"),
    c(0x2526, None, "BOX DRAWINGS UP HEAVY AND LEFT DOWN LIGHT", 0x00, "Box_Drawing"),
    c(0x2527, None, "BOX DRAWINGS DOWN HEAVY AND LEFT UP LIGHT", 0x00, "Box_Drawing"),
    c(0x2528, None, "BOX DRAWINGS VERTICAL HEAVY AND LEFT LIGHT", 0x00, "Box_Drawing"),
    c(0x2529, None, "BOX DRAWINGS DOWN LIGHT AND LEFT UP HEAVY", 0x00, "Box_Drawing"),
    c(0x252A, None, "BOX DRAWINGS UP LIGHT AND LEFT DOWN HEAVY", 0x00, "Box_Drawing"),
    c(0x252B, None, "BOX DRAWINGS HEAVY VERTICAL AND LEFT", 0x00, "Box_Drawing"),
    c(0x252C, None, "BOX DRAWINGS LIGHT DOWN AND HORIZONTAL", 0x00, "Box_Drawing"),
    c(0x252D, None, "BOX DRAWINGS LEFT HEAVY AND RIGHT DOWN LIGHT", 0x00, "Box_Drawing"),
    c(0x252E, None, "BOX DRAWINGS RIGHT HEAVY AND LEFT DOWN LIGHT", 0x00, "Box_Drawing"),
    c(0x252F, None, "BOX DRAWINGS DOWN LIGHT AND HORIZONTAL HEAVY", 0x00, "Box_Drawing"),
    c(0x2530, None, "BOX DRAWINGS DOWN HEAVY AND HORIZONTAL LIGHT", 0x00, "Box_Drawing"),
    c(0x2531, None, "BOX DRAWINGS RIGHT LIGHT AND LEFT DOWN HEAVY", 0x00, "Box_Drawing"),
    c(0x2532, None, "BOX DRAWINGS LEFT LIGHT AND RIGHT DOWN HEAVY", 0x00, "Box_Drawing"),
    c(0x2533, None, "BOX DRAWINGS HEAVY DOWN AND HORIZONTAL", 0x00, "Box_Drawing"),
    c(0x2534, None, "BOX DRAWINGS LIGHT UP AND HORIZONTAL", 0x00, "Box_Drawing"),
    c(0x2535, None, "BOX DRAWINGS LEFT HEAVY AND RIGHT UP LIGHT", 0x00, "Box_Drawing"),
    c(0x2536, None, "BOX DRAWINGS RIGHT HEAVY AND LEFT UP LIGHT", 0x00, "Box_Drawing"),
    c(0x2537, None, "BOX DRAWINGS UP LIGHT AND HORIZONTAL HEAVY", 0x00, "Box_Drawing"),
    c(0x2538, None, "BOX DRAWINGS UP HEAVY AND HORIZONTAL LIGHT", 0x00, "Box_Drawing"),
    c(0x2539, None, "BOX DRAWINGS RIGHT LIGHT AND LEFT UP HEAVY", 0x00, "Box_Drawing"),
    c(0x253A, None, "BOX DRAWINGS LEFT LIGHT AND RIGHT UP HEAVY", 0x00, "Box_Drawing"),
    c(0x253B, None, "BOX DRAWINGS HEAVY UP AND HORIZONTAL", 0x00, "Box_Drawing"),
    c(0x253C, None, "BOX DRAWINGS LIGHT VERTICAL AND HORIZONTAL", 0x00, "Box_Drawing"),
    c(0x253D, None, "BOX DRAWINGS LEFT HEAVY AND RIGHT VERTICAL LIGHT", 0x00, "Box_Drawing"),
    c(0x253E, None, "BOX DRAWINGS RIGHT HEAVY AND LEFT VERTICAL LIGHT", 0x00, "Box_Drawing"),
    c(0x253F, None, "BOX DRAWINGS VERTICAL LIGHT AND HORIZONTAL HEAVY", 0x00, "Box_Drawing"),
    c(0x2540, None, "BOX DRAWINGS UP HEAVY AND DOWN HORIZONTAL LIGHT", 0x00, "Box_Drawing"),
    c(0x2541, None, "BOX DRAWINGS DOWN HEAVY AND UP HORIZONTAL LIGHT", 0x00, "Box_Drawing"),
    c(0x2542, None, "BOX DRAWINGS VERTICAL HEAVY AND HORIZONTAL LIGHT", 0x00, "Box_Drawing"),
    c(0x2543, None, "BOX DRAWINGS LEFT UP HEAVY AND RIGHT DOWN LIGHT", 0x00, "Box_Drawing"),
    c(0x2544, None, "BOX DRAWINGS RIGHT UP HEAVY AND LEFT DOWN LIGHT", 0x00, "Box_Drawing"),
    c(0x2545, None, "BOX DRAWINGS LEFT DOWN HEAVY AND RIGHT UP LIGHT", 0x00, "Box_Drawing"),
    c(0x2546, None, "BOX DRAWINGS RIGHT DOWN HEAVY AND LEFT UP LIGHT", 0x00, "Box_Drawing"),
    c(0x2547, None, "BOX DRAWINGS DOWN LIGHT AND UP HORIZONTAL HEAVY", 0x00, "Box_Drawing"),
    c(0x2548, None, "BOX DRAWINGS UP LIGHT AND DOWN HORIZONTAL HEAVY", 0x00, "Box_Drawing"),
    c(0x2549, None, "BOX DRAWINGS RIGHT LIGHT AND LEFT VERTICAL HEAVY", 0x00, "Box_Drawing"),
    c(0x254A, None, "BOX DRAWINGS LEFT LIGHT AND RIGHT VERTICAL HEAVY", 0x00, "Box_Drawing"),
    c(0x254B, None, "BOX DRAWINGS HEAVY VERTICAL AND HORIZONTAL", 0x00, "Box_Drawing"),
    c(0x254C, None, "BOX DRAWINGS LIGHT DOUBLE DASH HORIZONTAL", 0x00, "Box_Drawing"),
    c(0x254D, None, "BOX DRAWINGS HEAVY DOUBLE DASH HORIZONTAL", 0x00, "Box_Drawing"),
    c(0x254E, None, "BOX DRAWINGS LIGHT DOUBLE DASH VERTICAL", 0x00, "Box_Drawing"),
    c(0x254F, None, "BOX DRAWINGS HEAVY DOUBLE DASH VERTICAL", 0x00, "Box_Drawing"),
    c(0x2550, None, "BOX DRAWINGS DOUBLE HORIZONTAL", 0x00, "Box_Drawing"),
    c(0x2551, None, "BOX DRAWINGS DOUBLE VERTICAL", 0x00, "Box_Drawing"),
    c(0x2552, None, "BOX DRAWINGS DOWN SINGLE AND RIGHT DOUBLE", 0x00, "Box_Drawing"),
    c(0x2553, None, "BOX DRAWINGS DOWN DOUBLE AND RIGHT SINGLE", 0x00, "Box_Drawing"),
    c(0x2554, None, "BOX DRAWINGS DOUBLE DOWN AND RIGHT", 0x00, "Box_Drawing"),
    c(0x2555, None, "BOX DRAWINGS DOWN SINGLE AND LEFT DOUBLE", 0x00, "Box_Drawing"),
    c(0x2556, None, "BOX DRAWINGS DOWN DOUBLE AND LEFT SINGLE", 0x00, "Box_Drawing"),
    c(0x2557, None, "BOX DRAWINGS DOUBLE DOWN AND LEFT", 0x00, "Box_Drawing"),
    c(0x2558, None, "BOX DRAWINGS UP SINGLE AND RIGHT DOUBLE", 0x00, "Box_Drawing"),
    c(0x2559, None, "BOX DRAWINGS UP DOUBLE AND RIGHT SINGLE", 0x00, "Box_Drawing"),
    c(0x255A, None, "BOX DRAWINGS DOUBLE UP AND RIGHT", 0x00, "Box_Drawing"),
    c(0x255B, None, "BOX DRAWINGS UP SINGLE AND LEFT DOUBLE", 0x00, "Box_Drawing"),
    c(0x255C, None, "BOX DRAWINGS UP DOUBLE AND LEFT SINGLE", 0x00, "Box_Drawing"),
    c(0x255D, None, "BOX DRAWINGS DOUBLE UP AND LEFT", 0x00, "Box_Drawing"),
    c(0x255E, None, "BOX DRAWINGS VERTICAL SINGLE AND RIGHT DOUBLE", 0x00, "Box_Drawing"),
    c(0x255F, None, "BOX DRAWINGS VERTICAL DOUBLE AND RIGHT SINGLE", 0x00, "Box_Drawing"),
    c(0x2560, None, "BOX DRAWINGS DOUBLE VERTICAL AND RIGHT", 0x00, "Box_Drawing"),
    c(0x2561, None, "BOX DRAWINGS VERTICAL SINGLE AND LEFT DOUBLE", 0x00, "Box_Drawing"),
    c(0x2562, None, "BOX DRAWINGS VERTICAL DOUBLE AND LEFT SINGLE", 0x00, "Box_Drawing"),
    c(0x2563, None, "BOX DRAWINGS DOUBLE VERTICAL AND LEFT", 0x00, "Box_Drawing"),
    c(0x2564, None, "BOX DRAWINGS DOWN SINGLE AND HORIZONTAL DOUBLE", 0x00, "Box_Drawing"),
    c(0x2565, None, "BOX DRAWINGS DOWN DOUBLE AND HORIZONTAL SINGLE", 0x00, "Box_Drawing"),
    c(0x2566, None, "BOX DRAWINGS DOUBLE DOWN AND HORIZONTAL", 0x00, "Box_Drawing"),
    c(0x2567, None, "BOX DRAWINGS UP SINGLE AND HORIZONTAL DOUBLE", 0x00, "Box_Drawing"),
    c(0x2568, None, "BOX DRAWINGS UP DOUBLE AND HORIZONTAL SINGLE", 0x00, "Box_Drawing"),
    c(0x2569, None, "BOX DRAWINGS DOUBLE UP AND HORIZONTAL", 0x00, "Box_Drawing"),
    c(0x256A, None, "BOX DRAWINGS VERTICAL SINGLE AND HORIZONTAL DOUBLE", 0x00, "Box_Drawing"),
    c(0x256B, None, "BOX DRAWINGS VERTICAL DOUBLE AND HORIZONTAL SINGLE", 0x00, "Box_Drawing"),
    c(0x256C, None, "BOX DRAWINGS DOUBLE VERTICAL AND HORIZONTAL", 0x00, "Box_Drawing"),
    c(0x256D, None, "BOX DRAWINGS LIGHT ARC DOWN AND RIGHT", 0x00, "Box_Drawing"),
    c(0x256E, None, "BOX DRAWINGS LIGHT ARC DOWN AND LEFT", 0x00, "Box_Drawing"),
    c(0x256F, None, "BOX DRAWINGS LIGHT ARC UP AND LEFT", 0x00, "Box_Drawing"),
    c(0x2570, None, "BOX DRAWINGS LIGHT ARC UP AND RIGHT", 0x00, "Box_Drawing"),
    c(0x2571, None, "BOX DRAWINGS LIGHT DIAGONAL UPPER RIGHT TO LOWER LEFT", 0x00, "Box_Drawing"),
    c(0x2572, None, "BOX DRAWINGS LIGHT DIAGONAL UPPER LEFT TO LOWER RIGHT", 0x00, "Box_Drawing"),
    c(0x2573, None, "BOX DRAWINGS LIGHT DIAGONAL CROSS", 0x00, "Box_Drawing"),
    c(0x2574, None, "BOX DRAWINGS LIGHT LEFT", 0x00, "Box_Drawing"),
    c(0x2575, None, "BOX DRAWINGS LIGHT UP", 0x00, "Box_Drawing"),
    c(0x2576, None, "BOX DRAWINGS LIGHT RIGHT", 0x00, "Box_Drawing"),
    c(0x2577, None, "BOX DRAWINGS LIGHT DOWN", 0x00, "Box_Drawing"),
    c(0x2578, None, "BOX DRAWINGS HEAVY LEFT", 0x00, "Box_Drawing"),
    c(0x2579, None, "BOX DRAWINGS HEAVY UP", 0x00, "Box_Drawing"),
    c(0x257A, None, "BOX DRAWINGS HEAVY RIGHT", 0x00, "Box_Drawing"),
    c(0x257B, None, "BOX DRAWINGS HEAVY DOWN", 0x00, "Box_Drawing"),
    c(0x257C, None, "BOX DRAWINGS LIGHT LEFT AND HEAVY RIGHT", 0x00, "Box_Drawing"),
    c(0x257D, None, "BOX DRAWINGS LIGHT UP AND HEAVY DOWN", 0x00, "Box_Drawing"),
    c(0x257E, None, "BOX DRAWINGS HEAVY LEFT AND LIGHT RIGHT", 0x00, "Box_Drawing"),
    c(0x257F, None, "BOX DRAWINGS HEAVY UP AND LIGHT DOWN", 0x00, "Box_Drawing"),
    c(0x2580, None, "UPPER HALF BLOCK", 0x00, "Block_Elements"),
    c(0x2581, None, "LOWER ONE EIGHTH BLOCK", 0x00, "Block_Elements"),
    c(0x2582, None, "LOWER ONE QUARTER BLOCK", 0x00, "Block_Elements"),
    c(0x2583, None, "LOWER THREE EIGHTHS BLOCK", 0x00, "Block_Elements"),
    c(0x2584, None, "LOWER HALF BLOCK", 0x00, "Block_Elements"),
    c(0x2585, None, "LOWER FIVE EIGHTHS BLOCK", 0x00, "Block_Elements"),
    c(0x2586, None, "LOWER THREE QUARTERS BLOCK", 0x00, "Block_Elements"),
    c(0x2587, None, "LOWER SEVEN EIGHTHS BLOCK", 0x00, "Block_Elements"),
    c(0x2588, None, "FULL BLOCK", 0x00, "Block_Elements"),
    c(0x2589, None, "LEFT SEVEN EIGHTHS BLOCK", 0x00, "Block_Elements"),
    c(0x258A, None, "LEFT THREE QUARTERS BLOCK", 0x00, "Block_Elements"),
    c(0x258B, None, "LEFT FIVE EIGHTHS BLOCK", 0x00, "Block_Elements"),
    c(0x258C, None, "LEFT HALF BLOCK", 0x00, "Block_Elements"),
    c(0x258D, None, "LEFT THREE EIGHTHS BLOCK", 0x00, "Block_Elements"),
    c(0x258E, None, "LEFT ONE QUARTER BLOCK", 0x00, "Block_Elements"),
    c(0x258F, None, "LEFT ONE EIGHTH BLOCK", 0x00, "Block_Elements"),
    c(0x2590, None, "RIGHT HALF BLOCK", 0x00, "Block_Elements"),
    c(0x2591, None, "LIGHT SHADE", 0x00, "Block_Elements"),
    c(0x2592, None, "MEDIUM SHADE", 0x00, "Block_Elements"),
    c(0x2593, None, "DARK SHADE", 0x00, "Block_Elements"),
    c(0x2594, None, "UPPER ONE EIGHTH BLOCK", 0x00, "Block_Elements"),
    c(0x2595, None, "RIGHT ONE EIGHTH BLOCK", 0x00, "Block_Elements"),
    c(0x2596, None, "QUADRANT LOWER LEFT", 0x00, "Block_Elements"),
    c(0x2597, None, "QUADRANT LOWER RIGHT", 0x00, "Block_Elements"),
    c(0x2598, None, "QUADRANT UPPER LEFT", 0x00, "Block_Elements"),
    c(0x2599, None, "QUADRANT UPPER LEFT AND LOWER LEFT AND LOWER RIGHT", 0x00, "Block_Elements"),
    c(0x259A, None, "QUADRANT UPPER LEFT AND LOWER RIGHT", 0x00, "Block_Elements"),
    c(0x259B, None, "QUADRANT UPPER LEFT AND UPPER RIGHT AND LOWER LEFT", 0x00, "Block_Elements"),
    c(0x259C, None, "QUADRANT UPPER LEFT AND UPPER RIGHT AND LOWER RIGHT", 0x00, "Block_Elements"),
    c(0x259D, None, "QUADRANT UPPER RIGHT", 0x00, "Block_Elements"),
    c(0x259E, None, "QUADRANT UPPER RIGHT AND LOWER LEFT", 0x00, "Block_Elements"),
    c(0x259F, None, "QUADRANT UPPER RIGHT AND LOWER LEFT AND LOWER RIGHT", 0x00, "Block_Elements"),
    c(0x25A0, None, "BLACK SQUARE", 0x02, "Geometric_Shapes"),
    c(0x25A1, None, "WHITE SQUARE", 0x02, "Geometric_Shapes"),
    c(0x25A2, None, "WHITE SQUARE WITH ROUNDED CORNERS", 0x00, "Geometric_Shapes"),
    c(0x25A3, None, "WHITE SQUARE CONTAINING BLACK SMALL SQUARE", 0x00, "Geometric_Shapes"),
    c(0x25A4, None, "SQUARE WITH HORIZONTAL FILL", 0x00, "Geometric_Shapes"),
    c(0x25A5, None, "SQUARE WITH VERTICAL FILL", 0x00, "Geometric_Shapes"),
    c(0x25A6, None, "SQUARE WITH ORTHOGONAL CROSSHATCH FILL", 0x00, "Geometric_Shapes"),
    c(0x25A7, None, "SQUARE WITH UPPER LEFT TO LOWER RIGHT FILL", 0x00, "Geometric_Shapes"),
    c(0x25A8, None, "SQUARE WITH UPPER RIGHT TO LOWER LEFT FILL", 0x00, "Geometric_Shapes"),
    c(0x25A9, None, "SQUARE WITH DIAGONAL CROSSHATCH FILL", 0x00, "Geometric_Shapes"),
    c(0x25AA, None, "BLACK SMALL SQUARE", 0x00, "Geometric_Shapes"),
    c(0x25AB, None, "WHITE SMALL SQUARE", 0x00, "Geometric_Shapes"),
    c(0x25AC, None, "BLACK RECTANGLE", 0x00, "Geometric_Shapes"),
    c(0x25AD, None, "WHITE RECTANGLE", 0x00, "Geometric_Shapes"),
    c(0x25AE, None, "BLACK VERTICAL RECTANGLE", 0x02, "Geometric_Shapes"),
    c(0x25AF, None, "WHITE VERTICAL RECTANGLE", 0x02, "Geometric_Shapes"),
    c(0x25B0, None, "BLACK PARALLELOGRAM", 0x02, "Geometric_Shapes"),
    c(0x25B1, None, "WHITE PARALLELOGRAM", 0x02, "Geometric_Shapes"),
    c(0x25B2, None, "BLACK UP-POINTING TRIANGLE", 0x02, "Geometric_Shapes"),
    c(0x25B3, None, "WHITE UP-POINTING TRIANGLE", 0x02, "Geometric_Shapes"),
    c(0x25B4, None, "BLACK UP-POINTING SMALL TRIANGLE", 0x02, "Geometric_Shapes"),
    c(0x25B5, None, "WHITE UP-POINTING SMALL TRIANGLE", 0x02, "Geometric_Shapes"),
    c(0x25B6, None, "BLACK RIGHT-POINTING TRIANGLE", 0x02, "Geometric_Shapes"),
    c(0x25B7, None, "WHITE RIGHT-POINTING TRIANGLE", 0x02, "Geometric_Shapes"),
    c(0x25B8, None, "BLACK RIGHT-POINTING SMALL TRIANGLE", 0x00, "Geometric_Shapes"),
    c(0x25B9, None, "WHITE RIGHT-POINTING SMALL TRIANGLE", 0x00, "Geometric_Shapes"),
    c(0x25BA, None, "BLACK RIGHT-POINTING POINTER", 0x00, "Geometric_Shapes"),
    c(0x25BB, None, "WHITE RIGHT-POINTING POINTER", 0x00, "Geometric_Shapes"),
    c(0x25BC, None, "BLACK DOWN-POINTING TRIANGLE", 0x02, "Geometric_Shapes"),
    c(0x25BD, None, "WHITE DOWN-POINTING TRIANGLE", 0x02, "Geometric_Shapes"),
    c(0x25BE, None, "BLACK DOWN-POINTING SMALL TRIANGLE", 0x02, "Geometric_Shapes"),
    c(0x25BF, None, "WHITE DOWN-POINTING SMALL TRIANGLE", 0x02, "Geometric_Shapes"),
    c(0x25C0, None, "BLACK LEFT-POINTING TRIANGLE", 0x02, "Geometric_Shapes"),
    c(0x25C1, None, "WHITE LEFT-POINTING TRIANGLE", 0x02, "Geometric_Shapes"),
    c(0x25C2, None, "BLACK LEFT-POINTING SMALL TRIANGLE", 0x00, "Geometric_Shapes"),
    c(0x25C3, None, "WHITE LEFT-POINTING SMALL TRIANGLE", 0x00, "Geometric_Shapes"),
    c(0x25C4, None, "BLACK LEFT-POINTING POINTER", 0x00, "Geometric_Shapes"),
    c(0x25C5, None, "WHITE LEFT-POINTING POINTER", 0x00, "Geometric_Shapes"),
    c(0x25C6, None, "BLACK DIAMOND", 0x02, "Geometric_Shapes"),
    c(0x25C7, None, "WHITE DIAMOND", 0x02, "Geometric_Shapes"),
    c(0x25C8, None, "WHITE DIAMOND CONTAINING BLACK SMALL DIAMOND", 0x00, "Geometric_Shapes"),
    c(0x25C9, None, "FISHEYE", 0x00, "Geometric_Shapes"),
    c(0x25CA, None, "LOZENGE", 0x02, "Geometric_Shapes"),
    c(0x25CB, None, "WHITE CIRCLE", 0x02, "Geometric_Shapes"),
    c(0x25CC, None, "DOTTED CIRCLE", 0x00, "Geometric_Shapes"),
    c(0x25CD, None, "CIRCLE WITH VERTICAL FILL", 0x00, "Geometric_Shapes"),
    c(0x25CE, None, "BULLSEYE", 0x00, "Geometric_Shapes"),
    c(0x25CF, None, "BLACK CIRCLE", 0x02, "Geometric_Shapes"),
    c(0x25D0, None, "CIRCLE WITH LEFT HALF BLACK", 0x02, "Geometric_Shapes"),
    c(0x25D1, None, "CIRCLE WITH RIGHT HALF BLACK", 0x02, "Geometric_Shapes"),
    c(0x25D2, None, "CIRCLE WITH LOWER HALF BLACK", 0x02, "Geometric_Shapes"),
    c(0x25D3, None, "CIRCLE WITH UPPER HALF BLACK", 0x02, "Geometric_Shapes"),
    c(0x25D4, None, "CIRCLE WITH UPPER RIGHT QUADRANT BLACK", 0x00, "Geometric_Shapes"),
    c(0x25D5, None, "CIRCLE WITH ALL BUT UPPER LEFT QUADRANT BLACK", 0x00, "Geometric_Shapes"),
    c(0x25D6, None, "LEFT HALF BLACK CIRCLE", 0x00, "Geometric_Shapes"),
    c(0x25D7, None, "RIGHT HALF BLACK CIRCLE", 0x00, "Geometric_Shapes"),
    c(0x25D8, None, "INVERSE BULLET", 0x00, "Geometric_Shapes"),
    c(0x25D9, None, "INVERSE WHITE CIRCLE", 0x00, "Geometric_Shapes"),
    c(0x25DA, None, "UPPER HALF INVERSE WHITE CIRCLE", 0x00, "Geometric_Shapes"),
    c(0x25DB, None, "LOWER HALF INVERSE WHITE CIRCLE", 0x00, "Geometric_Shapes"),
    c(0x25DC, None, "UPPER LEFT QUADRANT CIRCULAR ARC", 0x00, "Geometric_Shapes"),
    c(0x25DD, None, "UPPER RIGHT QUADRANT CIRCULAR ARC", 0x00, "Geometric_Shapes"),
    c(0x25DE, None, "LOWER RIGHT QUADRANT CIRCULAR ARC", 0x00, "Geometric_Shapes"),
    c(0x25DF, None, "LOWER LEFT QUADRANT CIRCULAR ARC", 0x00, "Geometric_Shapes"),
    c(0x25E0, None, "UPPER HALF CIRCLE", 0x00, "Geometric_Shapes"),
    c(0x25E1, None, "LOWER HALF CIRCLE", 0x00, "Geometric_Shapes"),
    c(0x25E2, None, "BLACK LOWER RIGHT TRIANGLE", 0x02, "Geometric_Shapes"),
    c(0x25E3, None, "BLACK LOWER LEFT TRIANGLE", 0x00, "Geometric_Shapes"),
    c(0x25E4, None, "BLACK UPPER LEFT TRIANGLE", 0x02, "Geometric_Shapes"),
    c(0x25E5, None, "BLACK UPPER RIGHT TRIANGLE", 0x00, "Geometric_Shapes"),
    c(0x25E6, None, "WHITE BULLET", 0x00, "Geometric_Shapes"),
    c(0x25E7, None, "SQUARE WITH LEFT HALF BLACK", 0x02, "Geometric_Shapes"),
    c(0x25E8, None, "SQUARE WITH RIGHT HALF BLACK", 0x02, "Geometric_Shapes"),
    c(0x25E9, None, "SQUARE WITH UPPER LEFT DIAGONAL HALF BLACK", 0x02, "Geometric_Shapes"),
    c(0x25EA, None, "SQUARE WITH LOWER RIGHT DIAGONAL HALF BLACK", 0x02, "Geometric_Shapes"),
    c(0x25EB, None, "WHITE SQUARE WITH VERTICAL BISECTING LINE", 0x02, "Geometric_Shapes"),
    c(0x25EC, None, "WHITE UP-POINTING TRIANGLE WITH DOT", 0x02, "Geometric_Shapes"),
    c(0x25ED, None, "UP-POINTING TRIANGLE WITH LEFT HALF BLACK", 0x00, "Geometric_Shapes"),
    c(0x25EE, None, "UP-POINTING TRIANGLE WITH RIGHT HALF BLACK", 0x00, "Geometric_Shapes"),
    c(0x25EF, None, "LARGE CIRCLE", 0x00, "Geometric_Shapes"),
    c(0x25F0, None, "WHITE SQUARE WITH UPPER LEFT QUADRANT", 0x00, "Geometric_Shapes"),
    c(0x25F1, None, "WHITE SQUARE WITH LOWER LEFT QUADRANT", 0x00, "Geometric_Shapes"),
    c(0x25F2, None, "WHITE SQUARE WITH LOWER RIGHT QUADRANT", 0x00, "Geometric_Shapes"),
    c(0x25F3, None, "WHITE SQUARE WITH UPPER RIGHT QUADRANT", 0x00, "Geometric_Shapes"),
    c(0x25F4, None, "WHITE CIRCLE WITH UPPER LEFT QUADRANT", 0x00, "Geometric_Shapes"),
    c(0x25F5, None, "WHITE CIRCLE WITH LOWER LEFT QUADRANT", 0x00, "Geometric_Shapes"),
    c(0x25F6, None, "WHITE CIRCLE WITH LOWER RIGHT QUADRANT", 0x00, "Geometric_Shapes"),
    c(0x25F7, None, "WHITE CIRCLE WITH UPPER RIGHT QUADRANT", 0x00, "Geometric_Shapes"),
    c(0x25F8, None, "UPPER LEFT TRIANGLE", 0x02, "Geometric_Shapes"),
    c(0x25F9, None, "UPPER RIGHT TRIANGLE", 0x02, "Geometric_Shapes"),
    c(0x25FA, None, "LOWER LEFT TRIANGLE", 0x02, "Geometric_Shapes"),
    c(0x25FB, None, "WHITE MEDIUM SQUARE", 0x02, "Geometric_Shapes"),
    c(0x25FC, None, "BLACK MEDIUM SQUARE", 0x02, "Geometric_Shapes"),
    c(0x25FD, None, "WHITE MEDIUM SMALL SQUARE", 0x02, "Geometric_Shapes"),
    c(0x25FE, None, "BLACK MEDIUM SMALL SQUARE", 0x02, "Geometric_Shapes"),
    c(0x25FF, None, "LOWER RIGHT TRIANGLE", 0x02, "Geometric_Shapes"),
    c(0x2600, None, "BLACK SUN WITH RAYS", 0x00, "Misc_Symbols"),
    c(0x2601, None, "CLOUD", 0x00, "Misc_Symbols"),
    c(0x2602, None, "UMBRELLA", 0x00, "Misc_Symbols"),
    c(0x2603, None, "SNOWMAN", 0x00, "Misc_Symbols"),
    c(0x2604, None, "COMET", 0x00, "Misc_Symbols"),
    c(0x2605, None, "BLACK STAR", 0x02, "Misc_Symbols"),
    c(0x2606, None, "WHITE STAR", 0x02, "Misc_Symbols"),
    c(0x2607, None, "LIGHTNING", 0x00, "Misc_Symbols"),
    c(0x2608, None, "THUNDERSTORM", 0x00, "Misc_Symbols"),
    c(0x2609, None, "SUN", 0x00, "Misc_Symbols"),
    c(0x260A, None, "ASCENDING NODE", 0x00, "Misc_Symbols"),
    c(0x260B, None, "DESCENDING NODE", 0x00, "Misc_Symbols"),
    c(0x260C, None, "CONJUNCTION", 0x00, "Misc_Symbols"),
    c(0x260D, None, "OPPOSITION", 0x00, "Misc_Symbols"),
    c(0x260E, None, "BLACK TELEPHONE", 0x00, "Misc_Symbols"),
    c(0x260F, None, "WHITE TELEPHONE", 0x00, "Misc_Symbols"),
    c(0x2610, None, "BALLOT BOX", 0x00, "Misc_Symbols"),
    c(0x2611, None, "BALLOT BOX WITH CHECK", 0x00, "Misc_Symbols"),
    c(0x2612, None, "BALLOT BOX WITH X", 0x00, "Misc_Symbols"),
    c(0x2613, None, "SALTIRE", 0x00, "Misc_Symbols"),
    c(0x2614, None, "UMBRELLA WITH RAIN DROPS", 0x00, "Misc_Symbols"),
    c(0x2615, None, "HOT BEVERAGE", 0x00, "Misc_Symbols"),
    c(0x2616, None, "WHITE SHOGI PIECE", 0x00, "Misc_Symbols"),
    c(0x2617, None, "BLACK SHOGI PIECE", 0x00, "Misc_Symbols"),
    c(0x2618, None, "SHAMROCK", 0x00, "Misc_Symbols"),
    c(0x2619, None, "REVERSED ROTATED FLORAL HEART BULLET", 0x00, "Misc_Symbols"),
    c(0x261A, None, "BLACK LEFT POINTING INDEX", 0x00, "Misc_Symbols"),
    c(0x261B, None, "BLACK RIGHT POINTING INDEX", 0x00, "Misc_Symbols"),
    c(0x261C, None, "WHITE LEFT POINTING INDEX", 0x00, "Misc_Symbols"),
    c(0x261D, None, "WHITE UP POINTING INDEX", 0x00, "Misc_Symbols"),
    c(0x261E, None, "WHITE RIGHT POINTING INDEX", 0x00, "Misc_Symbols"),
    c(0x261F, None, "WHITE DOWN POINTING INDEX", 0x00, "Misc_Symbols"),
    c(0x2620, None, "SKULL AND CROSSBONES", 0x00, "Misc_Symbols"),
    c(0x2621, None, "CAUTION SIGN", 0x00, "Misc_Symbols"),
    c(0x2622, None, "RADIOACTIVE SIGN", 0x00, "Misc_Symbols"),
    c(0x2623, None, "BIOHAZARD SIGN", 0x00, "Misc_Symbols"),
    c(0x2624, None, "CADUCEUS", 0x00, "Misc_Symbols"),
    c(0x2625, None, "ANKH", 0x00, "Misc_Symbols"),
    c(0x2626, None, "ORTHODOX CROSS", 0x00, "Misc_Symbols"),
    c(0x2627, None, "CHI RHO", 0x00, "Misc_Symbols"),
    c(0x2628, None, "CROSS OF LORRAINE", 0x00, "Misc_Symbols"),
    c(0x2629, None, "CROSS OF JERUSALEM", 0x00, "Misc_Symbols"),
    c(0x262A, None, "STAR AND CRESCENT", 0x00, "Misc_Symbols"),
    c(0x262B, None, "FARSI SYMBOL", 0x00, "Misc_Symbols"),
    c(0x262C, None, "ADI SHAKTI", 0x00, "Misc_Symbols"),
    c(0x262D, None, "HAMMER AND SICKLE", 0x00, "Misc_Symbols"),
    c(0x262E, None, "PEACE SYMBOL", 0x00, "Misc_Symbols"),
    c(0x262F, None, "YIN YANG", 0x00, "Misc_Symbols"),
    c(0x2630, None, "TRIGRAM FOR HEAVEN", 0x00, "Misc_Symbols"),
    c(0x2631, None, "TRIGRAM FOR LAKE", 0x00, "Misc_Symbols"),
    c(0x2632, None, "TRIGRAM FOR FIRE", 0x00, "Misc_Symbols"),
    c(0x2633, None, "TRIGRAM FOR THUNDER", 0x00, "Misc_Symbols"),
    c(0x2634, None, "TRIGRAM FOR WIND", 0x00, "Misc_Symbols"),
    c(0x2635, None, "TRIGRAM FOR WATER", 0x00, "Misc_Symbols"),
    c(0x2636, None, "TRIGRAM FOR MOUNTAIN", 0x00, "Misc_Symbols"),
    c(0x2637, None, "TRIGRAM FOR EARTH", 0x00, "Misc_Symbols"),
    c(0x2638, None, "WHEEL OF DHARMA", 0x00, "Misc_Symbols"),
    c(0x2639, None, "WHITE FROWNING FACE", 0x00, "Misc_Symbols"),
    c(0x263A, None, "WHITE SMILING FACE", 0x00, "Misc_Symbols"),
    c(0x263B, None, "BLACK SMILING FACE", 0x00, "Misc_Symbols"),
    c(0x263C, None, "WHITE SUN WITH RAYS", 0x00, "Misc_Symbols"),
    c(0x263D, None, "FIRST QUARTER MOON", 0x00, "Misc_Symbols"),
    c(0x263E, None, "LAST QUARTER MOON", 0x00, "Misc_Symbols"),
    c(0x263F, None, "MERCURY", 0x00, "Misc_Symbols"),
    c(0x2640, None, "FEMALE SIGN", 0x02, "Misc_Symbols"),
    c(0x2641, None, "EARTH", 0x00, "Misc_Symbols"),
    c(0x2642, None, "MALE SIGN", 0x02, "Misc_Symbols"),
    c(0x2643, None, "JUPITER", 0x00, "Misc_Symbols"),
    c(0x2644, None, "SATURN", 0x00, "Misc_Symbols"),
    c(0x2645, None, "URANUS", 0x00, "Misc_Symbols"),
    c(0x2646, None, "NEPTUNE", 0x00, "Misc_Symbols"),
    c(0x2647, None, "PLUTO", 0x00, "Misc_Symbols"),
    c(0x2648, None, "ARIES", 0x00, "Misc_Symbols"),
    c(0x2649, None, "TAURUS", 0x00, "Misc_Symbols"),
    c(0x264A, None, "GEMINI", 0x00, "Misc_Symbols"),
    c(0x264B, None, "CANCER", 0x00, "Misc_Symbols"),
    c(0x264C, None, "LEO", 0x00, "Misc_Symbols"),
    c(0x264D, None, "VIRGO", 0x00, "Misc_Symbols"),
    c(0x264E, None, "LIBRA", 0x00, "Misc_Symbols"),
    c(0x264F, None, "SCORPIUS", 0x00, "Misc_Symbols"),
    c(0x2650, None, "SAGITTARIUS", 0x00, "Misc_Symbols"),
    c(0x2651, None, "CAPRICORN", 0x00, "Misc_Symbols"),
    c(0x2652, None, "AQUARIUS", 0x00, "Misc_Symbols"),
    c(0x2653, None, "PISCES", 0x00, "Misc_Symbols"),
    c(0x2654, None, "WHITE CHESS KING", 0x00, "Misc_Symbols"),
    c(0x2655, None, "WHITE CHESS QUEEN", 0x00, "Misc_Symbols"),
    c(0x2656, None, "WHITE CHESS ROOK", 0x00, "Misc_Symbols"),
    c(0x2657, None, "WHITE CHESS BISHOP", 0x00, "Misc_Symbols"),
    c(0x2658, None, "WHITE CHESS KNIGHT", 0x00, "Misc_Symbols"),
    c(0x2659, None, "WHITE CHESS PAWN", 0x00, "Misc_Symbols"),
    c(0x265A, None, "BLACK CHESS KING", 0x00, "Misc_Symbols"),
    c(0x265B, None, "BLACK CHESS QUEEN", 0x00, "Misc_Symbols"),
    c(0x265C, None, "BLACK CHESS ROOK", 0x00, "Misc_Symbols"),
    c(0x265D, None, "BLACK CHESS BISHOP", 0x00, "Misc_Symbols"),
    c(0x265E, None, "BLACK CHESS KNIGHT", 0x00, "Misc_Symbols"),
    c(0x265F, None, "BLACK CHESS PAWN", 0x00, "Misc_Symbols"),
    c(0x2660, None, "BLACK SPADE SUIT", 0x02, "Misc_Symbols"),
    c(0x2661, None, "WHITE HEART SUIT", 0x02, "Misc_Symbols"),
    c(0x2662, None, "WHITE DIAMOND SUIT", 0x02, "Misc_Symbols"),
    c(0x2663, None, "BLACK CLUB SUIT", 0x02, "Misc_Symbols"),
    c(0x2664, None, "WHITE SPADE SUIT", 0x00, "Misc_Symbols"),
    c(0x2665, None, "BLACK HEART SUIT", 0x00, "Misc_Symbols"),
    c(0x2666, None, "BLACK DIAMOND SUIT", 0x00, "Misc_Symbols"),
    c(0x2667, None, "WHITE CLUB SUIT", 0x00, "Misc_Symbols"),
    c(0x2668, None, "HOT SPRINGS", 0x00, "Misc_Symbols"),
    c(0x2669, None, "QUARTER NOTE", 0x00, "Misc_Symbols"),
    c(0x266A, None, "EIGHTH NOTE", 0x00, "Misc_Symbols"),
    c(0x266B, None, "BEAMED EIGHTH NOTES", 0x00, "Misc_Symbols"),
    c(0x266C, None, "BEAMED SIXTEENTH NOTES", 0x00, "Misc_Symbols"),
    c(0x266D, None, "MUSIC FLAT SIGN", 0x02, "Misc_Symbols"),
    c(0x266E, None, "MUSIC NATURAL SIGN", 0x02, "Misc_Symbols"),
    c(0x266F, None, "MUSIC SHARP SIGN", 0x02, "Misc_Symbols"),
    c(0x2670, None, "WEST SYRIAC CROSS", 0x00, "Misc_Symbols"),
    c(0x2671, None, "EAST SYRIAC CROSS", 0x00, "Misc_Symbols"),
    c(0x2672, None, "UNIVERSAL RECYCLING SYMBOL", 0x00, "Misc_Symbols"),
    c(0x2673, None, "RECYCLING SYMBOL FOR TYPE-1 PLASTICS", 0x00, "Misc_Symbols"),
    c(0x2674, None, "RECYCLING SYMBOL FOR TYPE-2 PLASTICS", 0x00, "Misc_Symbols"),
    c(0x2675, None, "RECYCLING SYMBOL FOR TYPE-3 PLASTICS", 0x00, "Misc_Symbols"),
    c(0x2676, None, "RECYCLING SYMBOL FOR TYPE-4 PLASTICS", 0x00, "Misc_Symbols"),
    c(0x2677, None, "RECYCLING SYMBOL FOR TYPE-5 PLASTICS", 0x00, "Misc_Symbols"),
    c(0x2678, None, "RECYCLING SYMBOL FOR TYPE-6 PLASTICS", 0x00, "Misc_Symbols"),
    c(0x2679, None, "RECYCLING SYMBOL FOR TYPE-7 PLASTICS", 0x00, "Misc_Symbols"),
    c(0x267A, None, "RECYCLING SYMBOL FOR GENERIC MATERIALS", 0x00, "Misc_Symbols"),
    c(0x267B, None, "BLACK UNIVERSAL RECYCLING SYMBOL", 0x00, "Misc_Symbols"),
    c(0x267C, None, "RECYCLED PAPER SYMBOL", 0x00, "Misc_Symbols"),
    c(0x267D, None, "PARTIALLY-RECYCLED PAPER SYMBOL", 0x00, "Misc_Symbols"),
    c(0x267E, None, "PERMANENT PAPER SIGN", 0x00, "Misc_Symbols"),
    c(0x267F, None, "WHEELCHAIR SYMBOL", 0x00, "Misc_Symbols"),
    c(0x2680, None, "DIE FACE-1", 0x00, "Misc_Symbols"),
    c(0x2681, None, "DIE FACE-2", 0x00, "Misc_Symbols"),
    c(0x2682, None, "DIE FACE-3", 0x00, "Misc_Symbols"),
    c(0x2683, None, "DIE FACE-4", 0x00, "Misc_Symbols"),
    c(0x2684, None, "DIE FACE-5", 0x00, "Misc_Symbols"),
    c(0x2685, None, "DIE FACE-6", 0x00, "Misc_Symbols"),
    c(0x2686, None, "WHITE CIRCLE WITH DOT RIGHT", 0x00, "Misc_Symbols"),
    c(0x2687, None, "WHITE CIRCLE WITH TWO DOTS", 0x00, "Misc_Symbols"),
    c(0x2688, None, "BLACK CIRCLE WITH WHITE DOT RIGHT", 0x00, "Misc_Symbols"),
    c(0x2689, None, "BLACK CIRCLE WITH TWO WHITE DOTS", 0x00, "Misc_Symbols"),
    c(0x268A, None, "MONOGRAM FOR YANG", 0x00, "Misc_Symbols"),
    c(0x268B, None, "MONOGRAM FOR YIN", 0x00, "Misc_Symbols"),
    c(0x268C, None, "DIGRAM FOR GREATER YANG", 0x00, "Misc_Symbols"),
    c(0x268D, None, "DIGRAM FOR LESSER YIN", 0x00, "Misc_Symbols"),
    c(0x268E, None, "DIGRAM FOR LESSER YANG", 0x00, "Misc_Symbols"),
    c(0x268F, None, "DIGRAM FOR GREATER YIN", 0x00, "Misc_Symbols"),
    c(0x2690, None, "WHITE FLAG", 0x00, "Misc_Symbols"),
    c(0x2691, None, "BLACK FLAG", 0x00, "Misc_Symbols"),
    c(0x2692, None, "HAMMER AND PICK", 0x00, "Misc_Symbols"),
    c(0x2693, None, "ANCHOR", 0x00, "Misc_Symbols"),
    c(0x2694, None, "CROSSED SWORDS", 0x00, "Misc_Symbols"),
    c(0x2695, None, "STAFF OF AESCULAPIUS", 0x00, "Misc_Symbols"),
    c(0x2696, None, "SCALES", 0x00, "Misc_Symbols"),
    c(0x2697, None, "ALEMBIC", 0x00, "Misc_Symbols"),
    c(0x2698, None, "FLOWER", 0x00, "Misc_Symbols"),
    c(0x2699, None, "GEAR", 0x00, "Misc_Symbols"),
    c(0x269A, None, "STAFF OF HERMES", 0x00, "Misc_Symbols"),
    c(0x269B, None, "ATOM SYMBOL", 0x00, "Misc_Symbols"),
    c(0x269C, None, "FLEUR-DE-LIS", 0x00, "Misc_Symbols"),
    c(0x269D, None, "OUTLINED WHITE STAR", 0x00, "Misc_Symbols"),
    c(0x269E, None, "THREE LINES CONVERGING RIGHT", 0x00, "Misc_Symbols"),
    c(0x269F, None, "THREE LINES CONVERGING LEFT", 0x00, "Misc_Symbols"),
    c(0x26A0, None, "WARNING SIGN", 0x00, "Misc_Symbols"),
    c(0x26A1, None, "HIGH VOLTAGE SIGN", 0x00, "Misc_Symbols"),
    c(0x26A2, None, "DOUBLED FEMALE SIGN", 0x00, "Misc_Symbols"),
    c(0x26A3, None, "DOUBLED MALE SIGN", 0x00, "Misc_Symbols"),
    c(0x26A4, None, "INTERLOCKED FEMALE AND MALE SIGN", 0x00, "Misc_Symbols"),
    c(0x26A5, None, "MALE AND FEMALE SIGN", 0x00, "Misc_Symbols"),
    c(0x26A6, None, "MALE WITH STROKE SIGN", 0x00, "Misc_Symbols"),
    c(0x26A7, None, "MALE WITH STROKE AND MALE AND FEMALE SIGN", 0x00, "Misc_Symbols"),
    c(0x26A8, None, "VERTICAL MALE WITH STROKE SIGN", 0x00, "Misc_Symbols"),
    c(0x26A9, None, "HORIZONTAL MALE WITH STROKE SIGN", 0x00, "Misc_Symbols"),
    c(0x26AA, None, "MEDIUM WHITE CIRCLE", 0x00, "Misc_Symbols"),
    c(0x26AB, None, "MEDIUM BLACK CIRCLE", 0x00, "Misc_Symbols"),
    c(0x26AC, None, "MEDIUM SMALL WHITE CIRCLE", 0x00, "Misc_Symbols"),
    c(0x26AD, None, "MARRIAGE SYMBOL", 0x00, "Misc_Symbols"),
    c(0x26AE, None, "DIVORCE SYMBOL", 0x00, "Misc_Symbols"),
    c(0x26AF, None, "UNMARRIED PARTNERSHIP SYMBOL", 0x00, "Misc_Symbols"),
    c(0x26B0, None, "COFFIN", 0x00, "Misc_Symbols"),
    c(0x26B1, None, "FUNERAL URN", 0x00, "Misc_Symbols"),
    c(0x26B2, None, "NEUTER", 0x00, "Misc_Symbols"),
    c(0x26B3, None, "CERES", 0x00, "Misc_Symbols"),
    c(0x26B4, None, "PALLAS", 0x00, "Misc_Symbols"),
    c(0x26B5, None, "JUNO", 0x00, "Misc_Symbols"),
    c(0x26B6, None, "VESTA", 0x00, "Misc_Symbols"),
    c(0x26B7, None, "CHIRON", 0x00, "Misc_Symbols"),
    c(0x26B8, None, "BLACK MOON LILITH", 0x00, "Misc_Symbols"),
    c(0x26B9, None, "SEXTILE", 0x00, "Misc_Symbols"),
    c(0x26BA, None, "SEMISEXTILE", 0x00, "Misc_Symbols"),
    c(0x26BB, None, "QUINCUNX", 0x00, "Misc_Symbols"),
    c(0x26BC, None, "SESQUIQUADRATE", 0x00, "Misc_Symbols"),
    c(0x26BD, None, "SOCCER BALL", 0x00, "Misc_Symbols"),
    c(0x26BE, None, "BASEBALL", 0x00, "Misc_Symbols"),
    c(0x26BF, None, "SQUARED KEY", 0x00, "Misc_Symbols"),
    c(0x26C0, None, "WHITE DRAUGHTS MAN", 0x00, "Misc_Symbols"),
    c(0x26C1, None, "WHITE DRAUGHTS KING", 0x00, "Misc_Symbols"),
    c(0x26C2, None, "BLACK DRAUGHTS MAN", 0x00, "Misc_Symbols"),
    c(0x26C3, None, "BLACK DRAUGHTS KING", 0x00, "Misc_Symbols"),
    c(0x26C4, None, "SNOWMAN WITHOUT SNOW", 0x00, "Misc_Symbols"),
    c(0x26C5, None, "SUN BEHIND CLOUD", 0x00, "Misc_Symbols"),
    c(0x26C6, None, "RAIN", 0x00, "Misc_Symbols"),
    c(0x26C7, None, "BLACK SNOWMAN", 0x00, "Misc_Symbols"),
    c(0x26C8, None, "THUNDER CLOUD AND RAIN", 0x00, "Misc_Symbols"),
    c(0x26C9, None, "TURNED WHITE SHOGI PIECE", 0x00, "Misc_Symbols"),
    c(0x26CA, None, "TURNED BLACK SHOGI PIECE", 0x00, "Misc_Symbols"),
    c(0x26CB, None, "WHITE DIAMOND IN SQUARE", 0x00, "Misc_Symbols"),
    c(0x26CC, None, "CROSSING LANES", 0x00, "Misc_Symbols"),
    c(0x26CD, None, "DISABLED CAR", 0x00, "Misc_Symbols"),
    c(0x26CE, None, "OPHIUCHUS", 0x00, "Misc_Symbols"),
    c(0x26CF, None, "PICK", 0x00, "Misc_Symbols"),
    c(0x26D0, None, "CAR SLIDING", 0x00, "Misc_Symbols"),
    c(0x26D1, None, "HELMET WITH WHITE CROSS", 0x00, "Misc_Symbols"),
    c(0x26D2, None, "CIRCLED CROSSING LANES", 0x00, "Misc_Symbols"),
    c(0x26D3, None, "CHAINS", 0x00, "Misc_Symbols"),
    c(0x26D4, None, "NO ENTRY", 0x00, "Misc_Symbols"),
    c(0x26D5, None, "ALTERNATE ONE-WAY LEFT WAY TRAFFIC", 0x00, "Misc_Symbols"),
    c(0x26D6, None, "BLACK TWO-WAY LEFT WAY TRAFFIC", 0x00, "Misc_Symbols"),
    c(0x26D7, None, "WHITE TWO-WAY LEFT WAY TRAFFIC", 0x00, "Misc_Symbols"),
    c(0x26D8, None, "BLACK LEFT LANE MERGE", 0x00, "Misc_Symbols"),
    c(0x26D9, None, "WHITE LEFT LANE MERGE", 0x00, "Misc_Symbols"),
    c(0x26DA, None, "DRIVE SLOW SIGN", 0x00, "Misc_Symbols"),
    c(0x26DB, None, "HEAVY WHITE DOWN-POINTING TRIANGLE", 0x00, "Misc_Symbols"),
    c(0x26DC, None, "LEFT CLOSED ENTRY", 0x00, "Misc_Symbols"),
    c(0x26DD, None, "SQUARED SALTIRE", 0x00, "Misc_Symbols"),
    c(0x26DE, None, "FALLING DIAGONAL IN WHITE CIRCLE IN BLACK SQUARE", 0x00, "Misc_Symbols"),
    c(0x26DF, None, "BLACK TRUCK", 0x00, "Misc_Symbols"),
    c(0x26E0, None, "RESTRICTED LEFT ENTRY-1", 0x00, "Misc_Symbols"),
    c(0x26E1, None, "RESTRICTED LEFT ENTRY-2", 0x00, "Misc_Symbols"),
    c(0x26E2, None, "ASTRONOMICAL SYMBOL FOR URANUS", 0x00, "Misc_Symbols"),
    c(0x26E3, None, "HEAVY CIRCLE WITH STROKE AND TWO DOTS ABOVE", 0x00, "Misc_Symbols"),
    c(0x26E4, None, "PENTAGRAM", 0x00, "Misc_Symbols"),
    c(0x26E5, None, "RIGHT-HANDED INTERLACED PENTAGRAM", 0x00, "Misc_Symbols"),
    c(0x26E6, None, "LEFT-HANDED INTERLACED PENTAGRAM", 0x00, "Misc_Symbols"),
    c(0x26E7, None, "INVERTED PENTAGRAM", 0x00, "Misc_Symbols"),
    c(0x26E8, None, "BLACK CROSS ON SHIELD", 0x00, "Misc_Symbols"),
    c(0x26E9, None, "SHINTO SHRINE", 0x00, "Misc_Symbols"),
    c(0x26EA, None, "CHURCH", 0x00, "Misc_Symbols"),
    c(0x26EB, None, "CASTLE", 0x00, "Misc_Symbols"),
    c(0x26EC, None, "HISTORIC SITE", 0x00, "Misc_Symbols"),
    c(0x26ED, None, "GEAR WITHOUT HUB", 0x00, "Misc_Symbols"),
    c(0x26EE, None, "GEAR WITH HANDLES", 0x00, "Misc_Symbols"),
    c(0x26EF, None, "MAP SYMBOL FOR LIGHTHOUSE", 0x00, "Misc_Symbols"),
    c(0x26F0, None, "MOUNTAIN", 0x00, "Misc_Symbols"),
    c(0x26F1, None, "UMBRELLA ON GROUND", 0x00, "Misc_Symbols"),
    c(0x26F2, None, "FOUNTAIN", 0x00, "Misc_Symbols"),
    c(0x26F3, None, "FLAG IN HOLE", 0x00, "Misc_Symbols"),
    c(0x26F4, None, "FERRY", 0x00, "Misc_Symbols"),
    c(0x26F5, None, "SAILBOAT", 0x00, "Misc_Symbols"),
    c(0x26F6, None, "SQUARE FOUR CORNERS", 0x00, "Misc_Symbols"),
    c(0x26F7, None, "SKIER", 0x00, "Misc_Symbols"),
    c(0x26F8, None, "ICE SKATE", 0x00, "Misc_Symbols"),
    c(0x26F9, None, "PERSON WITH BALL", 0x00, "Misc_Symbols"),
    c(0x26FA, None, "TENT", 0x00, "Misc_Symbols"),
    c(0x26FB, None, "JAPANESE BANK SYMBOL", 0x00, "Misc_Symbols"),
    c(0x26FC, None, "HEADSTONE GRAVEYARD SYMBOL", 0x00, "Misc_Symbols"),
    c(0x26FD, None, "FUEL PUMP", 0x00, "Misc_Symbols"),
    c(0x26FE, None, "CUP ON BLACK SQUARE", 0x00, "Misc_Symbols"),
    c(0x26FF, None, "WHITE FLAG WITH HORIZONTAL MIDDLE BLACK STRIPE", 0x00, "Misc_Symbols"),
    c(0x2700, None, "BLACK SAFETY SCISSORS", 0x00, "Dingbats"),
    c(0x2701, None, "UPPER BLADE SCISSORS", 0x00, "Dingbats"),
    c(0x2702, None, "BLACK SCISSORS", 0x00, "Dingbats"),
    c(0x2703, None, "LOWER BLADE SCISSORS", 0x00, "Dingbats"),
    c(0x2704, None, "WHITE SCISSORS", 0x00, "Dingbats"),
    c(0x2705, None, "WHITE HEAVY CHECK MARK", 0x00, "Dingbats"),
    c(0x2706, None, "TELEPHONE LOCATION SIGN", 0x00, "Dingbats"),
    c(0x2707, None, "TAPE DRIVE", 0x00, "Dingbats"),
    c(0x2708, None, "AIRPLANE", 0x00, "Dingbats"),
    c(0x2709, None, "ENVELOPE", 0x00, "Dingbats"),
    c(0x270A, None, "RAISED FIST", 0x00, "Dingbats"),
    c(0x270B, None, "RAISED HAND", 0x00, "Dingbats"),
    c(0x270C, None, "VICTORY HAND", 0x00, "Dingbats"),
    c(0x270D, None, "WRITING HAND", 0x00, "Dingbats"),
    c(0x270E, None, "LOWER RIGHT PENCIL", 0x00, "Dingbats"),
    c(0x270F, None, "PENCIL", 0x00, "Dingbats"),
    c(0x2710, None, "UPPER RIGHT PENCIL", 0x00, "Dingbats"),
    c(0x2711, None, "WHITE NIB", 0x00, "Dingbats"),
    c(0x2712, None, "BLACK NIB", 0x00, "Dingbats"),
    c(0x2713, None, "CHECK MARK", 0x00, "Dingbats"),
    c(0x2714, None, "HEAVY CHECK MARK", 0x00, "Dingbats"),
    c(0x2715, None, "MULTIPLICATION X", 0x00, "Dingbats"),
    c(0x2716, None, "HEAVY MULTIPLICATION X", 0x00, "Dingbats"),
    c(0x2717, None, "BALLOT X", 0x00, "Dingbats"),
    c(0x2718, None, "HEAVY BALLOT X", 0x00, "Dingbats"),
    c(0x2719, None, "OUTLINED GREEK CROSS", 0x00, "Dingbats"),
    c(0x271A, None, "HEAVY GREEK CROSS", 0x00, "Dingbats"),
    c(0x271B, None, "OPEN CENTRE CROSS", 0x00, "Dingbats"),
    c(0x271C, None, "HEAVY OPEN CENTRE CROSS", 0x00, "Dingbats"),
    c(0x271D, None, "LATIN CROSS", 0x00, "Dingbats"),
    c(0x271E, None, "SHADOWED WHITE LATIN CROSS", 0x00, "Dingbats"),
    c(0x271F, None, "OUTLINED LATIN CROSS", 0x00, "Dingbats"),
    c(0x2720, None, "MALTESE CROSS", 0x00, "Dingbats"),
    c(0x2721, None, "STAR OF DAVID", 0x00, "Dingbats"),
    c(0x2722, None, "FOUR TEARDROP-SPOKED ASTERISK", 0x00, "Dingbats"),
    c(0x2723, None, "FOUR BALLOON-SPOKED ASTERISK", 0x00, "Dingbats"),
    c(0x2724, None, "HEAVY FOUR BALLOON-SPOKED ASTERISK", 0x00, "Dingbats"),
    c(0x2725, None, "FOUR CLUB-SPOKED ASTERISK", 0x00, "Dingbats"),
    c(0x2726, None, "BLACK FOUR POINTED STAR", 0x00, "Dingbats"),
    c(0x2727, None, "WHITE FOUR POINTED STAR", 0x00, "Dingbats"),
    c(0x2728, None, "SPARKLES", 0x00, "Dingbats"),
    c(0x2729, None, "STRESS OUTLINED WHITE STAR", 0x00, "Dingbats"),
    c(0x272A, None, "CIRCLED WHITE STAR", 0x00, "Dingbats"),
    c(0x272B, None, "OPEN CENTRE BLACK STAR", 0x00, "Dingbats"),
    c(0x272C, None, "BLACK CENTRE WHITE STAR", 0x00, "Dingbats"),
    c(0x272D, None, "OUTLINED BLACK STAR", 0x00, "Dingbats"),
    c(0x272E, None, "HEAVY OUTLINED BLACK STAR", 0x00, "Dingbats"),
    c(0x272F, None, "PINWHEEL STAR", 0x00, "Dingbats"),
    c(0x2730, None, "SHADOWED WHITE STAR", 0x00, "Dingbats"),
    c(0x2731, None, "HEAVY ASTERISK", 0x00, "Dingbats"),
    c(0x2732, None, "OPEN CENTRE ASTERISK", 0x00, "Dingbats"),
    c(0x2733, None, "EIGHT SPOKED ASTERISK", 0x00, "Dingbats"),
    c(0x2734, None, "EIGHT POINTED BLACK STAR", 0x00, "Dingbats"),
    c(0x2735, None, "EIGHT POINTED PINWHEEL STAR", 0x00, "Dingbats"),
    c(0x2736, None, "SIX POINTED BLACK STAR", 0x00, "Dingbats"),
    c(0x2737, None, "EIGHT POINTED RECTILINEAR BLACK STAR", 0x00, "Dingbats"),
    c(0x2738, None, "HEAVY EIGHT POINTED RECTILINEAR BLACK STAR", 0x00, "Dingbats"),
    c(0x2739, None, "TWELVE POINTED BLACK STAR", 0x00, "Dingbats"),
    c(0x273A, None, "SIXTEEN POINTED ASTERISK", 0x00, "Dingbats"),
    c(0x273B, None, "TEARDROP-SPOKED ASTERISK", 0x00, "Dingbats"),
    c(0x273C, None, "OPEN CENTRE TEARDROP-SPOKED ASTERISK", 0x00, "Dingbats"),
    c(0x273D, None, "HEAVY TEARDROP-SPOKED ASTERISK", 0x00, "Dingbats"),
    c(0x273E, None, "SIX PETALLED BLACK AND WHITE FLORETTE", 0x00, "Dingbats"),
    c(0x273F, None, "BLACK FLORETTE", 0x00, "Dingbats"),
    c(0x2740, None, "WHITE FLORETTE", 0x00, "Dingbats"),
    c(0x2741, None, "EIGHT PETALLED OUTLINED BLACK FLORETTE", 0x00, "Dingbats"),
    c(0x2742, None, "CIRCLED OPEN CENTRE EIGHT POINTED STAR", 0x00, "Dingbats"),
    c(0x2743, None, "HEAVY TEARDROP-SPOKED PINWHEEL ASTERISK", 0x00, "Dingbats"),
    c(0x2744, None, "SNOWFLAKE", 0x00, "Dingbats"),
    c(0x2745, None, "TIGHT TRIFOLIATE SNOWFLAKE", 0x00, "Dingbats"),
    c(0x2746, None, "HEAVY CHEVRON SNOWFLAKE", 0x00, "Dingbats"),
    c(0x2747, None, "SPARKLE", 0x00, "Dingbats"),
    c(0x2748, None, "HEAVY SPARKLE", 0x00, "Dingbats"),
    c(0x2749, None, "BALLOON-SPOKED ASTERISK", 0x00, "Dingbats"),
    c(0x274A, None, "EIGHT TEARDROP-SPOKED PROPELLER ASTERISK", 0x00, "Dingbats"),
    c(0x274B, None, "HEAVY EIGHT TEARDROP-SPOKED PROPELLER ASTERISK", 0x00, "Dingbats"),
    c(0x274C, None, "CROSS MARK", 0x00, "Dingbats"),
    c(0x274D, None, "SHADOWED WHITE CIRCLE", 0x00, "Dingbats"),
    c(0x274E, None, "NEGATIVE SQUARED CROSS MARK", 0x00, "Dingbats"),
    c(0x274F, None, "LOWER RIGHT DROP-SHADOWED WHITE SQUARE", 0x00, "Dingbats"),
    c(0x2750, None, "UPPER RIGHT DROP-SHADOWED WHITE SQUARE", 0x00, "Dingbats"),
    c(0x2751, None, "LOWER RIGHT SHADOWED WHITE SQUARE", 0x00, "Dingbats"),
    c(0x2752, None, "UPPER RIGHT SHADOWED WHITE SQUARE", 0x00, "Dingbats"),
    c(0x2753, None, "BLACK QUESTION MARK ORNAMENT", 0x00, "Dingbats"),
    c(0x2754, None, "WHITE QUESTION MARK ORNAMENT", 0x00, "Dingbats"),
    c(0x2755, None, "WHITE EXCLAMATION MARK ORNAMENT", 0x00, "Dingbats"),
    c(0x2756, None, "BLACK DIAMOND MINUS WHITE X", 0x00, "Dingbats"),
    c(0x2757, None, "HEAVY EXCLAMATION MARK SYMBOL", 0x00, "Dingbats"),
    c(0x2758, None, "LIGHT VERTICAL BAR", 0x00, "Dingbats"),
    c(0x2759, None, "MEDIUM VERTICAL BAR", 0x00, "Dingbats"),
    c(0x275A, None, "HEAVY VERTICAL BAR", 0x00, "Dingbats"),
    c(0x275B, None, "HEAVY SINGLE TURNED COMMA QUOTATION MARK ORNAMENT", 0x00, "Dingbats"),
    c(0x275C, None, "HEAVY SINGLE COMMA QUOTATION MARK ORNAMENT", 0x00, "Dingbats"),
    c(0x275D, None, "HEAVY DOUBLE TURNED COMMA QUOTATION MARK ORNAMENT", 0x00, "Dingbats"),
    c(0x275E, None, "HEAVY DOUBLE COMMA QUOTATION MARK ORNAMENT", 0x00, "Dingbats"),
    c(0x275F, None, "HEAVY LOW SINGLE COMMA QUOTATION MARK ORNAMENT", 0x00, "Dingbats"),
    c(0x2760, None, "HEAVY LOW DOUBLE COMMA QUOTATION MARK ORNAMENT", 0x00, "Dingbats"),
    c(0x2761, None, "CURVED STEM PARAGRAPH SIGN ORNAMENT", 0x00, "Dingbats"),
    c(0x2762, None, "HEAVY EXCLAMATION MARK ORNAMENT", 0x00, "Dingbats"),
    c(0x2763, None, "HEAVY HEART EXCLAMATION MARK ORNAMENT", 0x00, "Dingbats"),
    c(0x2764, None, "HEAVY BLACK HEART", 0x00, "Dingbats"),
    c(0x2765, None, "ROTATED HEAVY BLACK HEART BULLET", 0x00, "Dingbats"),
    c(0x2766, None, "FLORAL HEART", 0x00, "Dingbats"),
    c(0x2767, None, "ROTATED FLORAL HEART BULLET", 0x00, "Dingbats"),
    c(0x2768, None, "MEDIUM LEFT PARENTHESIS ORNAMENT", 0x00, "Dingbats"),
    c(0x2769, None, "MEDIUM RIGHT PARENTHESIS ORNAMENT", 0x00, "Dingbats"),
    c(0x276A, None, "MEDIUM FLATTENED LEFT PARENTHESIS ORNAMENT", 0x00, "Dingbats"),
    c(0x276B, None, "MEDIUM FLATTENED RIGHT PARENTHESIS ORNAMENT", 0x00, "Dingbats"),
    c(0x276C, None, "MEDIUM LEFT-POINTING ANGLE BRACKET ORNAMENT", 0x00, "Dingbats"),
    c(0x276D, None, "MEDIUM RIGHT-POINTING ANGLE BRACKET ORNAMENT", 0x00, "Dingbats"),
    c(0x276E, None, "HEAVY LEFT-POINTING ANGLE QUOTATION MARK ORNAMENT", 0x00, "Dingbats"),
    c(0x276F, None, "HEAVY RIGHT-POINTING ANGLE QUOTATION MARK ORNAMENT", 0x00, "Dingbats"),
    c(0x2770, None, "HEAVY LEFT-POINTING ANGLE BRACKET ORNAMENT", 0x00, "Dingbats"),
    c(0x2771, None, "HEAVY RIGHT-POINTING ANGLE BRACKET ORNAMENT", 0x00, "Dingbats"),
    c(0x2772, None, "LIGHT LEFT TORTOISE SHELL BRACKET ORNAMENT", 0x00, "Dingbats"),
    c(0x2773, None, "LIGHT RIGHT TORTOISE SHELL BRACKET ORNAMENT", 0x00, "Dingbats"),
    c(0x2774, None, "MEDIUM LEFT CURLY BRACKET ORNAMENT", 0x00, "Dingbats"),
    c(0x2775, None, "MEDIUM RIGHT CURLY BRACKET ORNAMENT", 0x00, "Dingbats"),
    c(0x2776, None, "DINGBAT NEGATIVE CIRCLED DIGIT ONE", 0x00, "Dingbats"),
    c(0x2777, None, "DINGBAT NEGATIVE CIRCLED DIGIT TWO", 0x00, "Dingbats"),
    c(0x2778, None, "DINGBAT NEGATIVE CIRCLED DIGIT THREE", 0x00, "Dingbats"),
    c(0x2779, None, "DINGBAT NEGATIVE CIRCLED DIGIT FOUR", 0x00, "Dingbats"),
    c(0x277A, None, "DINGBAT NEGATIVE CIRCLED DIGIT FIVE", 0x00, "Dingbats"),
    c(0x277B, None, "DINGBAT NEGATIVE CIRCLED DIGIT SIX", 0x00, "Dingbats"),
    c(0x277C, None, "DINGBAT NEGATIVE CIRCLED DIGIT SEVEN", 0x00, "Dingbats"),
    c(0x277D, None, "DINGBAT NEGATIVE CIRCLED DIGIT EIGHT", 0x00, "Dingbats"),
    c(0x277E, None, "DINGBAT NEGATIVE CIRCLED DIGIT NINE", 0x00, "Dingbats"),
    c(0x277F, None, "DINGBAT NEGATIVE CIRCLED NUMBER TEN", 0x00, "Dingbats"),
    c(0x2780, None, "DINGBAT CIRCLED SANS-SERIF DIGIT ONE", 0x00, "Dingbats"),
    c(0x2781, None, "DINGBAT CIRCLED SANS-SERIF DIGIT TWO", 0x00, "Dingbats"),
    c(0x2782, None, "DINGBAT CIRCLED SANS-SERIF DIGIT THREE", 0x00, "Dingbats"),
    c(0x2783, None, "DINGBAT CIRCLED SANS-SERIF DIGIT FOUR", 0x00, "Dingbats"),
    c(0x2784, None, "DINGBAT CIRCLED SANS-SERIF DIGIT FIVE", 0x00, "Dingbats"),
    c(0x2785, None, "DINGBAT CIRCLED SANS-SERIF DIGIT SIX", 0x00, "Dingbats"),
    c(0x2786, None, "DINGBAT CIRCLED SANS-SERIF DIGIT SEVEN", 0x00, "Dingbats"),
    c(0x2787, None, "DINGBAT CIRCLED SANS-SERIF DIGIT EIGHT", 0x00, "Dingbats"),
    c(0x2788, None, "DINGBAT CIRCLED SANS-SERIF DIGIT NINE", 0x00, "Dingbats"),
    c(0x2789, None, "DINGBAT CIRCLED SANS-SERIF NUMBER TEN", 0x00, "Dingbats"),
    c(0x278A, None, "DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT ONE", 0x00, "Dingbats"),
    c(0x278B, None, "DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT TWO", 0x00, "Dingbats"),
    c(0x278C, None, "DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT THREE", 0x00, "Dingbats"),
    c(0x278D, None, "DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT FOUR", 0x00, "Dingbats"),
    c(0x278E, None, "DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT FIVE", 0x00, "Dingbats"),
    c(0x278F, None, "DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT SIX", 0x00, "Dingbats"),
    c(0x2790, None, "DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT SEVEN", 0x00, "Dingbats"),
    c(0x2791, None, "DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT EIGHT", 0x00, "Dingbats"),
    c(0x2792, None, "DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT NINE", 0x00, "Dingbats"),
    c(0x2793, None, "DINGBAT NEGATIVE CIRCLED SANS-SERIF NUMBER TEN", 0x00, "Dingbats"),
    c(0x2794, None, "HEAVY WIDE-HEADED RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x2795, None, "HEAVY PLUS SIGN", 0x00, "Dingbats"),
    c(0x2796, None, "HEAVY MINUS SIGN", 0x00, "Dingbats"),
    c(0x2797, None, "HEAVY DIVISION SIGN", 0x00, "Dingbats"),
    c(0x2798, None, "HEAVY SOUTH EAST ARROW", 0x00, "Dingbats"),
    c(0x2799, None, "HEAVY RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x279A, None, "HEAVY NORTH EAST ARROW", 0x00, "Dingbats"),
    c(0x279B, None, "DRAFTING POINT RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x279C, None, "HEAVY ROUND-TIPPED RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x279D, None, "TRIANGLE-HEADED RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x279E, None, "HEAVY TRIANGLE-HEADED RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x279F, None, "DASHED TRIANGLE-HEADED RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27A0, None, "HEAVY DASHED TRIANGLE-HEADED RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27A1, None, "BLACK RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27A2, None, "THREE-D TOP-LIGHTED RIGHTWARDS ARROWHEAD", 0x00, "Dingbats"),
    c(0x27A3, None, "THREE-D BOTTOM-LIGHTED RIGHTWARDS ARROWHEAD", 0x00, "Dingbats"),
    c(0x27A4, None, "BLACK RIGHTWARDS ARROWHEAD", 0x00, "Dingbats"),
    c(0x27A5, None, "HEAVY BLACK CURVED DOWNWARDS AND RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27A6, None, "HEAVY BLACK CURVED UPWARDS AND RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27A7, None, "SQUAT BLACK RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27A8, None, "HEAVY CONCAVE-POINTED BLACK RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27A9, None, "RIGHT-SHADED WHITE RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27AA, None, "LEFT-SHADED WHITE RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27AB, None, "BACK-TILTED SHADOWED WHITE RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27AC, None, "FRONT-TILTED SHADOWED WHITE RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27AD, None, "HEAVY LOWER RIGHT-SHADOWED WHITE RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27AE, None, "HEAVY UPPER RIGHT-SHADOWED WHITE RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27AF, None, "NOTCHED LOWER RIGHT-SHADOWED WHITE RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27B0, None, "CURLY LOOP", 0x00, "Dingbats"),
    c(0x27B1, None, "NOTCHED UPPER RIGHT-SHADOWED WHITE RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27B2, None, "CIRCLED HEAVY WHITE RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27B3, None, "WHITE-FEATHERED RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27B4, None, "BLACK-FEATHERED SOUTH EAST ARROW", 0x00, "Dingbats"),
    c(0x27B5, None, "BLACK-FEATHERED RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27B6, None, "BLACK-FEATHERED NORTH EAST ARROW", 0x00, "Dingbats"),
    c(0x27B7, None, "HEAVY BLACK-FEATHERED SOUTH EAST ARROW", 0x00, "Dingbats"),
    c(0x27B8, None, "HEAVY BLACK-FEATHERED RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27B9, None, "HEAVY BLACK-FEATHERED NORTH EAST ARROW", 0x00, "Dingbats"),
    c(0x27BA, None, "TEARDROP-BARBED RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27BB, None, "HEAVY TEARDROP-SHANKED RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27BC, None, "WEDGE-TAILED RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27BD, None, "HEAVY WEDGE-TAILED RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27BE, None, "OPEN-OUTLINED RIGHTWARDS ARROW", 0x00, "Dingbats"),
    c(0x27BF, None, "DOUBLE CURLY LOOP", 0x00, "Dingbats"),
    c(0x27C0, None, "THREE DIMENSIONAL ANGLE", 0x02, "Misc_Math_Symbols_A"),
    c(0x27C1, None, "WHITE TRIANGLE CONTAINING SMALL WHITE TRIANGLE", 0x02, "Misc_Math_Symbols_A"),
    c(0x27C2, None, "PERPENDICULAR", 0x02, "Misc_Math_Symbols_A"),
    c(0x27C3, None, "OPEN SUBSET", 0x02, "Misc_Math_Symbols_A"),
    c(0x27C4, None, "OPEN SUPERSET", 0x02, "Misc_Math_Symbols_A"),
    c(0x27C5, None, "LEFT S-SHAPED BAG DELIMITER", 0x02, "Misc_Math_Symbols_A"),
    c(0x27C6, None, "RIGHT S-SHAPED BAG DELIMITER", 0x02, "Misc_Math_Symbols_A"),
    c(0x27C7, None, "OR WITH DOT INSIDE", 0x02, "Misc_Math_Symbols_A"),
    c(0x27C8, None, "REVERSE SOLIDUS PRECEDING SUBSET", 0x02, "Misc_Math_Symbols_A"),
    c(0x27C9, None, "SUPERSET PRECEDING SOLIDUS", 0x02, "Misc_Math_Symbols_A"),
    c(0x27CA, None, "VERTICAL BAR WITH HORIZONTAL STROKE", 0x02, "Misc_Math_Symbols_A"),
    c(0x27CB, None, "MATHEMATICAL RISING DIAGONAL", 0x02, "Misc_Math_Symbols_A"),
    c(0x27CC, None, "LONG DIVISION", 0x02, "Misc_Math_Symbols_A"),
    c(0x27CD, None, "MATHEMATICAL FALLING DIAGONAL", 0x02, "Misc_Math_Symbols_A"),
    c(0x27CE, None, "SQUARED LOGICAL AND", 0x02, "Misc_Math_Symbols_A"),
    c(0x27CF, None, "SQUARED LOGICAL OR", 0x02, "Misc_Math_Symbols_A"),
    c(0x27D0, None, "WHITE DIAMOND WITH CENTRED DOT", 0x02, "Misc_Math_Symbols_A"),
    c(0x27D1, None, "AND WITH DOT", 0x02, "Misc_Math_Symbols_A"),
    c(0x27D2, None, "ELEMENT OF OPENING UPWARDS", 0x02, "Misc_Math_Symbols_A"),
    c(0x27D3, None, "LOWER RIGHT CORNER WITH DOT", 0x02, "Misc_Math_Symbols_A"),
    c(0x27D4, None, "UPPER LEFT CORNER WITH DOT", 0x02, "Misc_Math_Symbols_A"),
    c(0x27D5, None, "LEFT OUTER JOIN", 0x02, "Misc_Math_Symbols_A"),
    c(0x27D6, None, "RIGHT OUTER JOIN", 0x02, "Misc_Math_Symbols_A"),
    c(0x27D7, None, "FULL OUTER JOIN", 0x02, "Misc_Math_Symbols_A"),
    c(0x27D8, None, "LARGE UP TACK", 0x02, "Misc_Math_Symbols_A"),
    c(0x27D9, None, "LARGE DOWN TACK", 0x02, "Misc_Math_Symbols_A"),
    c(0x27DA, None, "LEFT AND RIGHT DOUBLE TURNSTILE", 0x02, "Misc_Math_Symbols_A"),
    c(0x27DB, None, "LEFT AND RIGHT TACK", 0x02, "Misc_Math_Symbols_A"),
    c(0x27DC, None, "LEFT MULTIMAP", 0x02, "Misc_Math_Symbols_A"),
    c(0x27DD, None, "LONG RIGHT TACK", 0x02, "Misc_Math_Symbols_A"),
    c(0x27DE, None, "LONG LEFT TACK", 0x02, "Misc_Math_Symbols_A"),
    c(0x27DF, None, "UP TACK WITH CIRCLE ABOVE", 0x02, "Misc_Math_Symbols_A"),
    c(0x27E0, None, "LOZENGE DIVIDED BY HORIZONTAL RULE", 0x02, "Misc_Math_Symbols_A"),
    c(0x27E1, None, "WHITE CONCAVE-SIDED DIAMOND", 0x02, "Misc_Math_Symbols_A"),
    c(0x27E2, None, "WHITE CONCAVE-SIDED DIAMOND WITH LEFTWARDS TICK", 0x02, "Misc_Math_Symbols_A"),
    c(0x27E3, None, "WHITE CONCAVE-SIDED DIAMOND WITH RIGHTWARDS TICK", 0x02, "Misc_Math_Symbols_A"),
    c(0x27E4, None, "WHITE SQUARE WITH LEFTWARDS TICK", 0x02, "Misc_Math_Symbols_A"),
    c(0x27E5, None, "WHITE SQUARE WITH RIGHTWARDS TICK", 0x02, "Misc_Math_Symbols_A"),
    c(0x27E6, None, "MATHEMATICAL LEFT WHITE SQUARE BRACKET", 0x02, "Misc_Math_Symbols_A"),
    c(0x27E7, None, "MATHEMATICAL RIGHT WHITE SQUARE BRACKET", 0x02, "Misc_Math_Symbols_A"),
    c(0x27E8, None, "MATHEMATICAL LEFT ANGLE BRACKET", 0x02, "Misc_Math_Symbols_A"),
    c(0x27E9, None, "MATHEMATICAL RIGHT ANGLE BRACKET", 0x02, "Misc_Math_Symbols_A"),
    c(0x27EA, None, "MATHEMATICAL LEFT DOUBLE ANGLE BRACKET", 0x02, "Misc_Math_Symbols_A"),
    c(0x27EB, None, "MATHEMATICAL RIGHT DOUBLE ANGLE BRACKET", 0x02, "Misc_Math_Symbols_A"),
    c(0x27EC, None, "MATHEMATICAL LEFT WHITE TORTOISE SHELL BRACKET", 0x02, "Misc_Math_Symbols_A"),
    c(0x27ED, None, "MATHEMATICAL RIGHT WHITE TORTOISE SHELL BRACKET", 0x02, "Misc_Math_Symbols_A"),
    c(0x27EE, None, "MATHEMATICAL LEFT FLATTENED PARENTHESIS", 0x02, "Misc_Math_Symbols_A"),
    c(0x27EF, None, "MATHEMATICAL RIGHT FLATTENED PARENTHESIS", 0x02, "Misc_Math_Symbols_A"),
    c(0x27F0, None, "UPWARDS QUADRUPLE ARROW", 0x02, "Sup_Arrows_A"),
    c(0x27F1, None, "DOWNWARDS QUADRUPLE ARROW", 0x02, "Sup_Arrows_A"),
    c(0x27F2, None, "ANTICLOCKWISE GAPPED CIRCLE ARROW", 0x02, "Sup_Arrows_A"),
    c(0x27F3, None, "CLOCKWISE GAPPED CIRCLE ARROW", 0x02, "Sup_Arrows_A"),
    c(0x27F4, None, "RIGHT ARROW WITH CIRCLED PLUS", 0x02, "Sup_Arrows_A"),
    c(0x27F5, None, "LONG LEFTWARDS ARROW", 0x02, "Sup_Arrows_A"),
    c(0x27F6, None, "LONG RIGHTWARDS ARROW", 0x02, "Sup_Arrows_A"),
    c(0x27F7, None, "LONG LEFT RIGHT ARROW", 0x02, "Sup_Arrows_A"),
    c(0x27F8, None, "LONG LEFTWARDS DOUBLE ARROW", 0x02, "Sup_Arrows_A"),
    c(0x27F9, None, "LONG RIGHTWARDS DOUBLE ARROW", 0x02, "Sup_Arrows_A"),
    c(0x27FA, None, "LONG LEFT RIGHT DOUBLE ARROW", 0x02, "Sup_Arrows_A"),
    c(0x27FB, None, "LONG LEFTWARDS ARROW FROM BAR", 0x02, "Sup_Arrows_A"),
    c(0x27FC, None, "LONG RIGHTWARDS ARROW FROM BAR", 0x02, "Sup_Arrows_A"),
    c(0x27FD, None, "LONG LEFTWARDS DOUBLE ARROW FROM BAR", 0x02, "Sup_Arrows_A"),
    c(0x27FE, None, "LONG RIGHTWARDS DOUBLE ARROW FROM BAR", 0x02, "Sup_Arrows_A"),
    c(0x27FF, None, "LONG RIGHTWARDS SQUIGGLE ARROW", 0x02, "Sup_Arrows_A"),
    c(0x2800, None, "BRAILLE PATTERN BLANK", 0x00, "Braille"),
    c(0x2801, None, "BRAILLE PATTERN DOTS-1", 0x00, "Braille"),
    c(0x2802, None, "BRAILLE PATTERN DOTS-2", 0x00, "Braille"),
    c(0x2803, None, "BRAILLE PATTERN DOTS-12", 0x00, "Braille"),
    c(0x2804, None, "BRAILLE PATTERN DOTS-3", 0x00, "Braille"),
    c(0x2805, None, "BRAILLE PATTERN DOTS-13", 0x00, "Braille"),
    c(0x2806, None, "BRAILLE PATTERN DOTS-23", 0x00, "Braille"),
    c(0x2807, None, "BRAILLE PATTERN DOTS-123", 0x00, "Braille"),
    c(0x2808, None, "BRAILLE PATTERN DOTS-4", 0x00, "Braille"),
    c(0x2809, None, "BRAILLE PATTERN DOTS-14", 0x00, "Braille"),
    c(0x280A, None, "BRAILLE PATTERN DOTS-24", 0x00, "Braille"),
    c(0x280B, None, "BRAILLE PATTERN DOTS-124", 0x00, "Braille"),
    c(0x280C, None, "BRAILLE PATTERN DOTS-34", 0x00, "Braille"),
    c(0x280D, None, "BRAILLE PATTERN DOTS-134", 0x00, "Braille"),
    c(0x280E, None, "BRAILLE PATTERN DOTS-234", 0x00, "Braille"),
    c(0x280F, None, "BRAILLE PATTERN DOTS-1234", 0x00, "Braille"),
    c(0x2810, None, "BRAILLE PATTERN DOTS-5", 0x00, "Braille"),
    c(0x2811, None, "BRAILLE PATTERN DOTS-15", 0x00, "Braille"),
    c(0x2812, None, "BRAILLE PATTERN DOTS-25", 0x00, "Braille"),
    c(0x2813, None, "BRAILLE PATTERN DOTS-125", 0x00, "Braille"),
    c(0x2814, None, "BRAILLE PATTERN DOTS-35", 0x00, "Braille"),
    c(0x2815, None, "BRAILLE PATTERN DOTS-135", 0x00, "Braille"),
    c(0x2816, None, "BRAILLE PATTERN DOTS-235", 0x00, "Braille"),
    c(0x2817, None, "BRAILLE PATTERN DOTS-1235", 0x00, "Braille"),
    c(0x2818, None, "BRAILLE PATTERN DOTS-45", 0x00, "Braille"),
    c(0x2819, None, "BRAILLE PATTERN DOTS-145", 0x00, "Braille"),
    c(0x281A, None, "BRAILLE PATTERN DOTS-245", 0x00, "Braille"),
    c(0x281B, None, "BRAILLE PATTERN DOTS-1245", 0x00, "Braille"),
    c(0x281C, None, "BRAILLE PATTERN DOTS-345", 0x00, "Braille"),
    c(0x281D, None, "BRAILLE PATTERN DOTS-1345", 0x00, "Braille"),
    c(0x281E, None, "BRAILLE PATTERN DOTS-2345", 0x00, "Braille"),
    c(0x281F, None, "BRAILLE PATTERN DOTS-12345", 0x00, "Braille"),
    c(0x2820, None, "BRAILLE PATTERN DOTS-6", 0x00, "Braille"),
    c(0x2821, None, "BRAILLE PATTERN DOTS-16", 0x00, "Braille"),
    c(0x2822, None, "BRAILLE PATTERN DOTS-26", 0x00, "Braille"),
    c(0x2823, None, "BRAILLE PATTERN DOTS-126", 0x00, "Braille"),
    c(0x2824, None, "BRAILLE PATTERN DOTS-36", 0x00, "Braille"),
    c(0x2825, None, "BRAILLE PATTERN DOTS-136", 0x00, "Braille"),
    c(0x2826, None, "BRAILLE PATTERN DOTS-236", 0x00, "Braille"),
    c(0x2827, None, "BRAILLE PATTERN DOTS-1236", 0x00, "Braille"),
    c(0x2828, None, "BRAILLE PATTERN DOTS-46", 0x00, "Braille"),
    c(0x2829, None, "BRAILLE PATTERN DOTS-146", 0x00, "Braille"),
    c(0x282A, None, "BRAILLE PATTERN DOTS-246", 0x00, "Braille"),
    c(0x282B, None, "BRAILLE PATTERN DOTS-1246", 0x00, "Braille"),
    c(0x282C, None, "BRAILLE PATTERN DOTS-346", 0x00, "Braille"),
    c(0x282D, None, "BRAILLE PATTERN DOTS-1346", 0x00, "Braille"),
    c(0x282E, None, "BRAILLE PATTERN DOTS-2346", 0x00, "Braille"),
    c(0x282F, None, "BRAILLE PATTERN DOTS-12346", 0x00, "Braille"),
    c(0x2830, None, "BRAILLE PATTERN DOTS-56", 0x00, "Braille"),
    c(0x2831, None, "BRAILLE PATTERN DOTS-156", 0x00, "Braille"),
    c(0x2832, None, "BRAILLE PATTERN DOTS-256", 0x00, "Braille"),
    c(0x2833, None, "BRAILLE PATTERN DOTS-1256", 0x00, "Braille"),
    c(0x2834, None, "BRAILLE PATTERN DOTS-356", 0x00, "Braille"),
    c(0x2835, None, "BRAILLE PATTERN DOTS-1356", 0x00, "Braille"),
    c(0x2836, None, "BRAILLE PATTERN DOTS-2356", 0x00, "Braille"),
    c(0x2837, None, "BRAILLE PATTERN DOTS-12356", 0x00, "Braille"),
    c(0x2838, None, "BRAILLE PATTERN DOTS-456", 0x00, "Braille"),
    c(0x2839, None, "BRAILLE PATTERN DOTS-1456", 0x00, "Braille"),
    c(0x283A, None, "BRAILLE PATTERN DOTS-2456", 0x00, "Braille"),
    c(0x283B, None, "BRAILLE PATTERN DOTS-12456", 0x00, "Braille"),
    c(0x283C, None, "BRAILLE PATTERN DOTS-3456", 0x00, "Braille"),
    c(0x283D, None, "BRAILLE PATTERN DOTS-13456", 0x00, "Braille"),
    c(0x283E, None, "BRAILLE PATTERN DOTS-23456", 0x00, "Braille"),
    c(0x283F, None, "BRAILLE PATTERN DOTS-123456", 0x00, "Braille"),
    c(0x2840, None, "BRAILLE PATTERN DOTS-7", 0x00, "Braille"),
    c(0x2841, None, "BRAILLE PATTERN DOTS-17", 0x00, "Braille"),
    c(0x2842, None, "BRAILLE PATTERN DOTS-27", 0x00, "Braille"),
    c(0x2843, None, "BRAILLE PATTERN DOTS-127", 0x00, "Braille"),
    c(0x2844, None, "BRAILLE PATTERN DOTS-37", 0x00, "Braille"),
    c(0x2845, None, "BRAILLE PATTERN DOTS-137", 0x00, "Braille"),
    c(0x2846, None, "BRAILLE PATTERN DOTS-237", 0x00, "Braille"),
    c(0x2847, None, "BRAILLE PATTERN DOTS-1237", 0x00, "Braille"),
    c(0x2848, None, "BRAILLE PATTERN DOTS-47", 0x00, "Braille"),
    c(0x2849, None, "BRAILLE PATTERN DOTS-147", 0x00, "Braille"),
    c(0x284A, None, "BRAILLE PATTERN DOTS-247", 0x00, "Braille"),
    c(0x284B, None, "BRAILLE PATTERN DOTS-1247", 0x00, "Braille"),
    c(0x284C, None, "BRAILLE PATTERN DOTS-347", 0x00, "Braille"),
    c(0x284D, None, "BRAILLE PATTERN DOTS-1347", 0x00, "Braille"),
    c(0x284E, None, "BRAILLE PATTERN DOTS-2347", 0x00, "Braille"),
    c(0x284F, None, "BRAILLE PATTERN DOTS-12347", 0x00, "Braille"),
    c(0x2850, None, "BRAILLE PATTERN DOTS-57", 0x00, "Braille"),
    c(0x2851, None, "BRAILLE PATTERN DOTS-157", 0x00, "Braille"),
    c(0x2852, None, "BRAILLE PATTERN DOTS-257", 0x00, "Braille"),
    c(0x2853, None, "BRAILLE PATTERN DOTS-1257", 0x00, "Braille"),
    c(0x2854, None, "BRAILLE PATTERN DOTS-357", 0x00, "Braille"),
    c(0x2855, None, "BRAILLE PATTERN DOTS-1357", 0x00, "Braille"),
    c(0x2856, None, "BRAILLE PATTERN DOTS-2357", 0x00, "Braille"),
    c(0x2857, None, "BRAILLE PATTERN DOTS-12357", 0x00, "Braille"),
    c(0x2858, None, "BRAILLE PATTERN DOTS-457", 0x00, "Braille"),
    c(0x2859, None, "BRAILLE PATTERN DOTS-1457", 0x00, "Braille"),
    c(0x285A, None, "BRAILLE PATTERN DOTS-2457", 0x00, "Braille"),
    c(0x285B, None, "BRAILLE PATTERN DOTS-12457", 0x00, "Braille"),
    c(0x285C, None, "BRAILLE PATTERN DOTS-3457", 0x00, "Braille"),
    c(0x285D, None, "BRAILLE PATTERN DOTS-13457", 0x00, "Braille"),
    c(0x285E, None, "BRAILLE PATTERN DOTS-23457", 0x00, "Braille"),
    c(0x285F, None, "BRAILLE PATTERN DOTS-123457", 0x00, "Braille"),
    c(0x2860, None, "BRAILLE PATTERN DOTS-67", 0x00, "Braille"),
    c(0x2861, None, "BRAILLE PATTERN DOTS-167", 0x00, "Braille"),
    c(0x2862, None, "BRAILLE PATTERN DOTS-267", 0x00, "Braille"),
    c(0x2863, None, "BRAILLE PATTERN DOTS-1267", 0x00, "Braille"),
    c(0x2864, None, "BRAILLE PATTERN DOTS-367", 0x00, "Braille"),
    c(0x2865, None, "BRAILLE PATTERN DOTS-1367", 0x00, "Braille"),
    c(0x2866, None, "BRAILLE PATTERN DOTS-2367", 0x00, "Braille"),
    c(0x2867, None, "BRAILLE PATTERN DOTS-12367", 0x00, "Braille"),
    c(0x2868, None, "BRAILLE PATTERN DOTS-467", 0x00, "Braille"),
    c(0x2869, None, "BRAILLE PATTERN DOTS-1467", 0x00, "Braille"),
    c(0x286A, None, "BRAILLE PATTERN DOTS-2467", 0x00, "Braille"),
    c(0x286B, None, "BRAILLE PATTERN DOTS-12467", 0x00, "Braille"),
    c(0x286C, None, "BRAILLE PATTERN DOTS-3467", 0x00, "Braille"),
    c(0x286D, None, "BRAILLE PATTERN DOTS-13467", 0x00, "Braille"),
    c(0x286E, None, "BRAILLE PATTERN DOTS-23467", 0x00, "Braille"),
    c(0x286F, None, "BRAILLE PATTERN DOTS-123467", 0x00, "Braille"),
    c(0x2870, None, "BRAILLE PATTERN DOTS-567", 0x00, "Braille"),
    c(0x2871, None, "BRAILLE PATTERN DOTS-1567", 0x00, "Braille"),
    c(0x2872, None, "BRAILLE PATTERN DOTS-2567", 0x00, "Braille"),
    c(0x2873, None, "BRAILLE PATTERN DOTS-12567", 0x00, "Braille"),
    c(0x2874, None, "BRAILLE PATTERN DOTS-3567", 0x00, "Braille"),
    c(0x2875, None, "BRAILLE PATTERN DOTS-13567", 0x00, "Braille"),
    c(0x2876, None, "BRAILLE PATTERN DOTS-23567", 0x00, "Braille"),
    c(0x2877, None, "BRAILLE PATTERN DOTS-123567", 0x00, "Braille"),
    c(0x2878, None, "BRAILLE PATTERN DOTS-4567", 0x00, "Braille"),
    c(0x2879, None, "BRAILLE PATTERN DOTS-14567", 0x00, "Braille"),
    c(0x287A, None, "BRAILLE PATTERN DOTS-24567", 0x00, "Braille"),
    c(0x287B, None, "BRAILLE PATTERN DOTS-124567", 0x00, "Braille"),
    c(0x287C, None, "BRAILLE PATTERN DOTS-34567", 0x00, "Braille"),
    c(0x287D, None, "BRAILLE PATTERN DOTS-134567", 0x00, "Braille"),
    c(0x287E, None, "BRAILLE PATTERN DOTS-234567", 0x00, "Braille"),
    c(0x287F, None, "BRAILLE PATTERN DOTS-1234567", 0x00, "Braille"),
    c(0x2880, None, "BRAILLE PATTERN DOTS-8", 0x00, "Braille"),
    c(0x2881, None, "BRAILLE PATTERN DOTS-18", 0x00, "Braille"),
    c(0x2882, None, "BRAILLE PATTERN DOTS-28", 0x00, "Braille"),
    c(0x2883, None, "BRAILLE PATTERN DOTS-128", 0x00, "Braille"),
    c(0x2884, None, "BRAILLE PATTERN DOTS-38", 0x00, "Braille"),
    c(0x2885, None, "BRAILLE PATTERN DOTS-138", 0x00, "Braille"),
    c(0x2886, None, "BRAILLE PATTERN DOTS-238", 0x00, "Braille"),
    c(0x2887, None, "BRAILLE PATTERN DOTS-1238", 0x00, "Braille"),
    c(0x2888, None, "BRAILLE PATTERN DOTS-48", 0x00, "Braille"),
    c(0x2889, None, "BRAILLE PATTERN DOTS-148", 0x00, "Braille"),
    c(0x288A, None, "BRAILLE PATTERN DOTS-248", 0x00, "Braille"),
    c(0x288B, None, "BRAILLE PATTERN DOTS-1248", 0x00, "Braille"),
    c(0x288C, None, "BRAILLE PATTERN DOTS-348", 0x00, "Braille"),
    c(0x288D, None, "BRAILLE PATTERN DOTS-1348", 0x00, "Braille"),
    c(0x288E, None, "BRAILLE PATTERN DOTS-2348", 0x00, "Braille"),
    c(0x288F, None, "BRAILLE PATTERN DOTS-12348", 0x00, "Braille"),
    c(0x2890, None, "BRAILLE PATTERN DOTS-58", 0x00, "Braille"),
    c(0x2891, None, "BRAILLE PATTERN DOTS-158", 0x00, "Braille"),
    c(0x2892, None, "BRAILLE PATTERN DOTS-258", 0x00, "Braille"),
    c(0x2893, None, "BRAILLE PATTERN DOTS-1258", 0x00, "Braille"),
    c(0x2894, None, "BRAILLE PATTERN DOTS-358", 0x00, "Braille"),
    c(0x2895, None, "BRAILLE PATTERN DOTS-1358", 0x00, "Braille"),
    c(0x2896, None, "BRAILLE PATTERN DOTS-2358", 0x00, "Braille"),
    c(0x2897, None, "BRAILLE PATTERN DOTS-12358", 0x00, "Braille"),
    c(0x2898, None, "BRAILLE PATTERN DOTS-458", 0x00, "Braille"),
    c(0x2899, None, "BRAILLE PATTERN DOTS-1458", 0x00, "Braille"),
    c(0x289A, None, "BRAILLE PATTERN DOTS-2458", 0x00, "Braille"),
    c(0x289B, None, "BRAILLE PATTERN DOTS-12458", 0x00, "Braille"),
    c(0x289C, None, "BRAILLE PATTERN DOTS-3458", 0x00, "Braille"),
    c(0x289D, None, "BRAILLE PATTERN DOTS-13458", 0x00, "Braille"),
    c(0x289E, None, "BRAILLE PATTERN DOTS-23458", 0x00, "Braille"),
    c(0x289F, None, "BRAILLE PATTERN DOTS-123458", 0x00, "Braille"),
    c(0x28A0, None, "BRAILLE PATTERN DOTS-68", 0x00, "Braille"),
    c(0x28A1, None, "BRAILLE PATTERN DOTS-168", 0x00, "Braille"),
    c(0x28A2, None, "BRAILLE PATTERN DOTS-268", 0x00, "Braille"),
    c(0x28A3, None, "BRAILLE PATTERN DOTS-1268", 0x00, "Braille"),
    c(0x28A4, None, "BRAILLE PATTERN DOTS-368", 0x00, "Braille"),
    c(0x28A5, None, "BRAILLE PATTERN DOTS-1368", 0x00, "Braille"),
    c(0x28A6, None, "BRAILLE PATTERN DOTS-2368", 0x00, "Braille"),
    c(0x28A7, None, "BRAILLE PATTERN DOTS-12368", 0x00, "Braille"),
    c(0x28A8, None, "BRAILLE PATTERN DOTS-468", 0x00, "Braille"),
    c(0x28A9, None, "BRAILLE PATTERN DOTS-1468", 0x00, "Braille"),
    c(0x28AA, None, "BRAILLE PATTERN DOTS-2468", 0x00, "Braille"),
    c(0x28AB, None, "BRAILLE PATTERN DOTS-12468", 0x00, "Braille"),
    c(0x28AC, None, "BRAILLE PATTERN DOTS-3468", 0x00, "Braille"),
    c(0x28AD, None, "BRAILLE PATTERN DOTS-13468", 0x00, "Braille"),
    c(0x28AE, None, "BRAILLE PATTERN DOTS-23468", 0x00, "Braille"),
    c(0x28AF, None, "BRAILLE PATTERN DOTS-123468", 0x00, "Braille"),
    c(0x28B0, None, "BRAILLE PATTERN DOTS-568", 0x00, "Braille"),
    c(0x28B1, None, "BRAILLE PATTERN DOTS-1568", 0x00, "Braille"),
    c(0x28B2, None, "BRAILLE PATTERN DOTS-2568", 0x00, "Braille"),
    c(0x28B3, None, "BRAILLE PATTERN DOTS-12568", 0x00, "Braille"),
    c(0x28B4, None, "BRAILLE PATTERN DOTS-3568", 0x00, "Braille"),
    c(0x28B5, None, "BRAILLE PATTERN DOTS-13568", 0x00, "Braille"),
    c(0x28B6, None, "BRAILLE PATTERN DOTS-23568", 0x00, "Braille"),
    c(0x28B7, None, "BRAILLE PATTERN DOTS-123568", 0x00, "Braille"),
    c(0x28B8, None, "BRAILLE PATTERN DOTS-4568", 0x00, "Braille"),
    c(0x28B9, None, "BRAILLE PATTERN DOTS-14568", 0x00, "Braille"),
    c(0x28BA, None, "BRAILLE PATTERN DOTS-24568", 0x00, "Braille"),
    c(0x28BB, None, "BRAILLE PATTERN DOTS-124568", 0x00, "Braille"),
    c(0x28BC, None, "BRAILLE PATTERN DOTS-34568", 0x00, "Braille"),
    c(0x28BD, None, "BRAILLE PATTERN DOTS-134568", 0x00, "Braille"),
    c(0x28BE, None, "BRAILLE PATTERN DOTS-234568", 0x00, "Braille"),
    c(0x28BF, None, "BRAILLE PATTERN DOTS-1234568", 0x00, "Braille"),
    c(0x28C0, None, "BRAILLE PATTERN DOTS-78", 0x00, "Braille"),
    c(0x28C1, None, "BRAILLE PATTERN DOTS-178", 0x00, "Braille"),
    c(0x28C2, None, "BRAILLE PATTERN DOTS-278", 0x00, "Braille"),
    c(0x28C3, None, "BRAILLE PATTERN DOTS-1278", 0x00, "Braille"),
    c(0x28C4, None, "BRAILLE PATTERN DOTS-378", 0x00, "Braille"),
    c(0x28C5, None, "BRAILLE PATTERN DOTS-1378", 0x00, "Braille"),
    c(0x28C6, None, "BRAILLE PATTERN DOTS-2378", 0x00, "Braille"),
    c(0x28C7, None, "BRAILLE PATTERN DOTS-12378", 0x00, "Braille"),
    c(0x28C8, None, "BRAILLE PATTERN DOTS-478", 0x00, "Braille"),
    c(0x28C9, None, "BRAILLE PATTERN DOTS-1478", 0x00, "Braille"),
    c(0x28CA, None, "BRAILLE PATTERN DOTS-2478", 0x00, "Braille"),
    c(0x28CB, None, "BRAILLE PATTERN DOTS-12478", 0x00, "Braille"),
    c(0x28CC, None, "BRAILLE PATTERN DOTS-3478", 0x00, "Braille"),
    c(0x28CD, None, "BRAILLE PATTERN DOTS-13478", 0x00, "Braille"),
    c(0x28CE, None, "BRAILLE PATTERN DOTS-23478", 0x00, "Braille"),
    c(0x28CF, None, "BRAILLE PATTERN DOTS-123478", 0x00, "Braille"),
    c(0x28D0, None, "BRAILLE PATTERN DOTS-578", 0x00, "Braille"),
    c(0x28D1, None, "BRAILLE PATTERN DOTS-1578", 0x00, "Braille"),
    c(0x28D2, None, "BRAILLE PATTERN DOTS-2578", 0x00, "Braille"),
    c(0x28D3, None, "BRAILLE PATTERN DOTS-12578", 0x00, "Braille"),
    c(0x28D4, None, "BRAILLE PATTERN DOTS-3578", 0x00, "Braille"),
    c(0x28D5, None, "BRAILLE PATTERN DOTS-13578", 0x00, "Braille"),
    c(0x28D6, None, "BRAILLE PATTERN DOTS-23578", 0x00, "Braille"),
    c(0x28D7, None, "BRAILLE PATTERN DOTS-123578", 0x00, "Braille"),
    c(0x28D8, None, "BRAILLE PATTERN DOTS-4578", 0x00, "Braille"),
    c(0x28D9, None, "BRAILLE PATTERN DOTS-14578", 0x00, "Braille"),
    c(0x28DA, None, "BRAILLE PATTERN DOTS-24578", 0x00, "Braille"),
    c(0x28DB, None, "BRAILLE PATTERN DOTS-124578", 0x00, "Braille"),
    c(0x28DC, None, "BRAILLE PATTERN DOTS-34578", 0x00, "Braille"),
    c(0x28DD, None, "BRAILLE PATTERN DOTS-134578", 0x00, "Braille"),
    c(0x28DE, None, "BRAILLE PATTERN DOTS-234578", 0x00, "Braille"),
    c(0x28DF, None, "BRAILLE PATTERN DOTS-1234578", 0x00, "Braille"),
    c(0x28E0, None, "BRAILLE PATTERN DOTS-678", 0x00, "Braille"),
    c(0x28E1, None, "BRAILLE PATTERN DOTS-1678", 0x00, "Braille"),
    c(0x28E2, None, "BRAILLE PATTERN DOTS-2678", 0x00, "Braille"),
    c(0x28E3, None, "BRAILLE PATTERN DOTS-12678", 0x00, "Braille"),
    c(0x28E4, None, "BRAILLE PATTERN DOTS-3678", 0x00, "Braille"),
    c(0x28E5, None, "BRAILLE PATTERN DOTS-13678", 0x00, "Braille"),
    c(0x28E6, None, "BRAILLE PATTERN DOTS-23678", 0x00, "Braille"),
    c(0x28E7, None, "BRAILLE PATTERN DOTS-123678", 0x00, "Braille"),
    c(0x28E8, None, "BRAILLE PATTERN DOTS-4678", 0x00, "Braille"),
    c(0x28E9, None, "BRAILLE PATTERN DOTS-14678", 0x00, "Braille"),
    c(0x28EA, None, "BRAILLE PATTERN DOTS-24678", 0x00, "Braille"),
    c(0x28EB, None, "BRAILLE PATTERN DOTS-124678", 0x00, "Braille"),
    c(0x28EC, None, "BRAILLE PATTERN DOTS-34678", 0x00, "Braille"),
    c(0x28ED, None, "BRAILLE PATTERN DOTS-134678", 0x00, "Braille"),
    c(0x28EE, None, "BRAILLE PATTERN DOTS-234678", 0x00, "Braille"),
    c(0x28EF, None, "BRAILLE PATTERN DOTS-1234678", 0x00, "Braille"),
    c(0x28F0, None, "BRAILLE PATTERN DOTS-5678", 0x00, "Braille"),
    c(0x28F1, None, "BRAILLE PATTERN DOTS-15678", 0x00, "Braille"),
    c(0x28F2, None, "BRAILLE PATTERN DOTS-25678", 0x00, "Braille"),
    c(0x28F3, None, "BRAILLE PATTERN DOTS-125678", 0x00, "Braille"),
    c(0x28F4, None, "BRAILLE PATTERN DOTS-35678", 0x00, "Braille"),
    c(0x28F5, None, "BRAILLE PATTERN DOTS-135678", 0x00, "Braille"),
    c(0x28F6, None, "BRAILLE PATTERN DOTS-235678", 0x00, "Braille"),
    c(0x28F7, None, "BRAILLE PATTERN DOTS-1235678", 0x00, "Braille"),
    c(0x28F8, None, "BRAILLE PATTERN DOTS-45678", 0x00, "Braille"),
    c(0x28F9, None, "BRAILLE PATTERN DOTS-145678", 0x00, "Braille"),
    c(0x28FA, None, "BRAILLE PATTERN DOTS-245678", 0x00, "Braille"),
    c(0x28FB, None, "BRAILLE PATTERN DOTS-1245678", 0x00, "Braille"),
    c(0x28FC, None, "BRAILLE PATTERN DOTS-345678", 0x00, "Braille"),
    c(0x28FD, None, "BRAILLE PATTERN DOTS-1345678", 0x00, "Braille"),
    c(0x28FE, None, "BRAILLE PATTERN DOTS-2345678", 0x00, "Braille"),
    c(0x28FF, None, "BRAILLE PATTERN DOTS-12345678", 0x00, "Braille"),
    c(0x2900, None, "RIGHTWARDS TWO-HEADED ARROW WITH VERTICAL STROKE", 0x02, "Sup_Arrows_B"),
    c(0x2901, None, "RIGHTWARDS TWO-HEADED ARROW WITH DOUBLE VERTICAL STROKE", 0x02, "Sup_Arrows_B"),
    c(0x2902, None, "LEFTWARDS DOUBLE ARROW WITH VERTICAL STROKE", 0x02, "Sup_Arrows_B"),
    c(0x2903, None, "RIGHTWARDS DOUBLE ARROW WITH VERTICAL STROKE", 0x02, "Sup_Arrows_B"),
    c(0x2904, None, "LEFT RIGHT DOUBLE ARROW WITH VERTICAL STROKE", 0x02, "Sup_Arrows_B"),
    c(0x2905, None, "RIGHTWARDS TWO-HEADED ARROW FROM BAR", 0x02, "Sup_Arrows_B"),
    c(0x2906, None, "LEFTWARDS DOUBLE ARROW FROM BAR", 0x02, "Sup_Arrows_B"),
    c(0x2907, None, "RIGHTWARDS DOUBLE ARROW FROM BAR", 0x02, "Sup_Arrows_B"),
    c(0x2908, None, "DOWNWARDS ARROW WITH HORIZONTAL STROKE", 0x02, "Sup_Arrows_B"),
    c(0x2909, None, "UPWARDS ARROW WITH HORIZONTAL STROKE", 0x02, "Sup_Arrows_B"),
    c(0x290A, None, "UPWARDS TRIPLE ARROW", 0x02, "Sup_Arrows_B"),
    c(0x290B, None, "DOWNWARDS TRIPLE ARROW", 0x02, "Sup_Arrows_B"),
    c(0x290C, None, "LEFTWARDS DOUBLE DASH ARROW", 0x02, "Sup_Arrows_B"),
    c(0x290D, None, "RIGHTWARDS DOUBLE DASH ARROW", 0x02, "Sup_Arrows_B"),
    c(0x290E, None, "LEFTWARDS TRIPLE DASH ARROW", 0x02, "Sup_Arrows_B"),
    c(0x290F, None, "RIGHTWARDS TRIPLE DASH ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2910, None, "RIGHTWARDS TWO-HEADED TRIPLE DASH ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2911, None, "RIGHTWARDS ARROW WITH DOTTED STEM", 0x02, "Sup_Arrows_B"),
    c(0x2912, None, "UPWARDS ARROW TO BAR", 0x02, "Sup_Arrows_B"),
    c(0x2913, None, "DOWNWARDS ARROW TO BAR", 0x02, "Sup_Arrows_B"),
    c(0x2914, None, "RIGHTWARDS ARROW WITH TAIL WITH VERTICAL STROKE", 0x02, "Sup_Arrows_B"),
    c(0x2915, None, "RIGHTWARDS ARROW WITH TAIL WITH DOUBLE VERTICAL STROKE", 0x02, "Sup_Arrows_B"),
    c(0x2916, None, "RIGHTWARDS TWO-HEADED ARROW WITH TAIL", 0x02, "Sup_Arrows_B"),
    c(0x2917, None, "RIGHTWARDS TWO-HEADED ARROW WITH TAIL WITH VERTICAL STROKE", 0x02, "Sup_Arrows_B"),
    c(0x2918, None, "RIGHTWARDS TWO-HEADED ARROW WITH TAIL WITH DOUBLE VERTICAL STROKE", 0x02, "Sup_Arrows_B"),
    c(0x2919, None, "LEFTWARDS ARROW-TAIL", 0x02, "Sup_Arrows_B"),
    c(0x291A, None, "RIGHTWARDS ARROW-TAIL", 0x02, "Sup_Arrows_B"),
    c(0x291B, None, "LEFTWARDS DOUBLE ARROW-TAIL", 0x02, "Sup_Arrows_B"),
    c(0x291C, None, "RIGHTWARDS DOUBLE ARROW-TAIL", 0x02, "Sup_Arrows_B"),
    c(0x291D, None, "LEFTWARDS ARROW TO BLACK DIAMOND", 0x02, "Sup_Arrows_B"),
    c(0x291E, None, "RIGHTWARDS ARROW TO BLACK DIAMOND", 0x02, "Sup_Arrows_B"),
    c(0x291F, None, "LEFTWARDS ARROW FROM BAR TO BLACK DIAMOND", 0x02, "Sup_Arrows_B"),
    c(0x2920, None, "RIGHTWARDS ARROW FROM BAR TO BLACK DIAMOND", 0x02, "Sup_Arrows_B"),
    c(0x2921, None, "NORTH WEST AND SOUTH EAST ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2922, None, "NORTH EAST AND SOUTH WEST ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2923, None, "NORTH WEST ARROW WITH HOOK", 0x02, "Sup_Arrows_B"),
    c(0x2924, None, "NORTH EAST ARROW WITH HOOK", 0x02, "Sup_Arrows_B"),
    c(0x2925, None, "SOUTH EAST ARROW WITH HOOK", 0x02, "Sup_Arrows_B"),
    c(0x2926, None, "SOUTH WEST ARROW WITH HOOK", 0x02, "Sup_Arrows_B"),
    c(0x2927, None, "NORTH WEST ARROW AND NORTH EAST ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2928, None, "NORTH EAST ARROW AND SOUTH EAST ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2929, None, "SOUTH EAST ARROW AND SOUTH WEST ARROW", 0x02, "Sup_Arrows_B"),
    c(0x292A, None, "SOUTH WEST ARROW AND NORTH WEST ARROW", 0x02, "Sup_Arrows_B"),
    c(0x292B, None, "RISING DIAGONAL CROSSING FALLING DIAGONAL", 0x02, "Sup_Arrows_B"),
    c(0x292C, None, "FALLING DIAGONAL CROSSING RISING DIAGONAL", 0x02, "Sup_Arrows_B"),
    c(0x292D, None, "SOUTH EAST ARROW CROSSING NORTH EAST ARROW", 0x02, "Sup_Arrows_B"),
    c(0x292E, None, "NORTH EAST ARROW CROSSING SOUTH EAST ARROW", 0x02, "Sup_Arrows_B"),
    c(0x292F, None, "FALLING DIAGONAL CROSSING NORTH EAST ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2930, None, "RISING DIAGONAL CROSSING SOUTH EAST ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2931, None, "NORTH EAST ARROW CROSSING NORTH WEST ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2932, None, "NORTH WEST ARROW CROSSING NORTH EAST ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2933, None, "WAVE ARROW POINTING DIRECTLY RIGHT", 0x02, "Sup_Arrows_B"),
    c(0x2934, None, "ARROW POINTING RIGHTWARDS THEN CURVING UPWARDS", 0x02, "Sup_Arrows_B"),
    c(0x2935, None, "ARROW POINTING RIGHTWARDS THEN CURVING DOWNWARDS", 0x02, "Sup_Arrows_B"),
    c(0x2936, None, "ARROW POINTING DOWNWARDS THEN CURVING LEFTWARDS", 0x02, "Sup_Arrows_B"),
    c(0x2937, None, "ARROW POINTING DOWNWARDS THEN CURVING RIGHTWARDS", 0x02, "Sup_Arrows_B"),
    c(0x2938, None, "RIGHT-SIDE ARC CLOCKWISE ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2939, None, "LEFT-SIDE ARC ANTICLOCKWISE ARROW", 0x02, "Sup_Arrows_B"),
    c(0x293A, None, "TOP ARC ANTICLOCKWISE ARROW", 0x02, "Sup_Arrows_B"),
    c(0x293B, None, "BOTTOM ARC ANTICLOCKWISE ARROW", 0x02, "Sup_Arrows_B"),
    c(0x293C, None, "TOP ARC CLOCKWISE ARROW WITH MINUS", 0x02, "Sup_Arrows_B"),
    c(0x293D, None, "TOP ARC ANTICLOCKWISE ARROW WITH PLUS", 0x02, "Sup_Arrows_B"),
    c(0x293E, None, "LOWER RIGHT SEMICIRCULAR CLOCKWISE ARROW", 0x02, "Sup_Arrows_B"),
    c(0x293F, None, "LOWER LEFT SEMICIRCULAR ANTICLOCKWISE ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2940, None, "ANTICLOCKWISE CLOSED CIRCLE ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2941, None, "CLOCKWISE CLOSED CIRCLE ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2942, None, "RIGHTWARDS ARROW ABOVE SHORT LEFTWARDS ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2943, None, "LEFTWARDS ARROW ABOVE SHORT RIGHTWARDS ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2944, None, "SHORT RIGHTWARDS ARROW ABOVE LEFTWARDS ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2945, None, "RIGHTWARDS ARROW WITH PLUS BELOW", 0x02, "Sup_Arrows_B"),
    c(0x2946, None, "LEFTWARDS ARROW WITH PLUS BELOW", 0x02, "Sup_Arrows_B"),
    c(0x2947, None, "RIGHTWARDS ARROW THROUGH X", 0x02, "Sup_Arrows_B"),
    c(0x2948, None, "LEFT RIGHT ARROW THROUGH SMALL CIRCLE", 0x02, "Sup_Arrows_B"),
    c(0x2949, None, "UPWARDS TWO-HEADED ARROW FROM SMALL CIRCLE", 0x02, "Sup_Arrows_B"),
    c(0x294A, None, "LEFT BARB UP RIGHT BARB DOWN HARPOON", 0x02, "Sup_Arrows_B"),
    c(0x294B, None, "LEFT BARB DOWN RIGHT BARB UP HARPOON", 0x02, "Sup_Arrows_B"),
    c(0x294C, None, "UP BARB RIGHT DOWN BARB LEFT HARPOON", 0x02, "Sup_Arrows_B"),
    c(0x294D, None, "UP BARB LEFT DOWN BARB RIGHT HARPOON", 0x02, "Sup_Arrows_B"),
    c(0x294E, None, "LEFT BARB UP RIGHT BARB UP HARPOON", 0x02, "Sup_Arrows_B"),
    c(0x294F, None, "UP BARB RIGHT DOWN BARB RIGHT HARPOON", 0x02, "Sup_Arrows_B"),
    c(0x2950, None, "LEFT BARB DOWN RIGHT BARB DOWN HARPOON", 0x02, "Sup_Arrows_B"),
    c(0x2951, None, "UP BARB LEFT DOWN BARB LEFT HARPOON", 0x02, "Sup_Arrows_B"),
    c(0x2952, None, "LEFTWARDS HARPOON WITH BARB UP TO BAR", 0x02, "Sup_Arrows_B"),
    c(0x2953, None, "RIGHTWARDS HARPOON WITH BARB UP TO BAR", 0x02, "Sup_Arrows_B"),
    c(0x2954, None, "UPWARDS HARPOON WITH BARB RIGHT TO BAR", 0x02, "Sup_Arrows_B"),
    c(0x2955, None, "DOWNWARDS HARPOON WITH BARB RIGHT TO BAR", 0x02, "Sup_Arrows_B"),
    c(0x2956, None, "LEFTWARDS HARPOON WITH BARB DOWN TO BAR", 0x02, "Sup_Arrows_B"),
    c(0x2957, None, "RIGHTWARDS HARPOON WITH BARB DOWN TO BAR", 0x02, "Sup_Arrows_B"),
    c(0x2958, None, "UPWARDS HARPOON WITH BARB LEFT TO BAR", 0x02, "Sup_Arrows_B"),
    c(0x2959, None, "DOWNWARDS HARPOON WITH BARB LEFT TO BAR", 0x02, "Sup_Arrows_B"),
    c(0x295A, None, "LEFTWARDS HARPOON WITH BARB UP FROM BAR", 0x02, "Sup_Arrows_B"),
    c(0x295B, None, "RIGHTWARDS HARPOON WITH BARB UP FROM BAR", 0x02, "Sup_Arrows_B"),
    c(0x295C, None, "UPWARDS HARPOON WITH BARB RIGHT FROM BAR", 0x02, "Sup_Arrows_B"),
    c(0x295D, None, "DOWNWARDS HARPOON WITH BARB RIGHT FROM BAR", 0x02, "Sup_Arrows_B"),
    c(0x295E, None, "LEFTWARDS HARPOON WITH BARB DOWN FROM BAR", 0x02, "Sup_Arrows_B"),
    c(0x295F, None, "RIGHTWARDS HARPOON WITH BARB DOWN FROM BAR", 0x02, "Sup_Arrows_B"),
    c(0x2960, None, "UPWARDS HARPOON WITH BARB LEFT FROM BAR", 0x02, "Sup_Arrows_B"),
    c(0x2961, None, "DOWNWARDS HARPOON WITH BARB LEFT FROM BAR", 0x02, "Sup_Arrows_B"),
    c(0x2962, None, "LEFTWARDS HARPOON WITH BARB UP ABOVE LEFTWARDS HARPOON WITH BARB DOWN", 0x02, "Sup_Arrows_B"),
    c(0x2963, None, "UPWARDS HARPOON WITH BARB LEFT BESIDE UPWARDS HARPOON WITH BARB RIGHT", 0x02, "Sup_Arrows_B"),
    c(0x2964, None, "RIGHTWARDS HARPOON WITH BARB UP ABOVE RIGHTWARDS HARPOON WITH BARB DOWN", 0x02, "Sup_Arrows_B"),
    c(0x2965, None, "DOWNWARDS HARPOON WITH BARB LEFT BESIDE DOWNWARDS HARPOON WITH BARB RIGHT", 0x02, "Sup_Arrows_B"),
    c(0x2966, None, "LEFTWARDS HARPOON WITH BARB UP ABOVE RIGHTWARDS HARPOON WITH BARB UP", 0x02, "Sup_Arrows_B"),
    c(0x2967, None, "LEFTWARDS HARPOON WITH BARB DOWN ABOVE RIGHTWARDS HARPOON WITH BARB DOWN", 0x02, "Sup_Arrows_B"),
    c(0x2968, None, "RIGHTWARDS HARPOON WITH BARB UP ABOVE LEFTWARDS HARPOON WITH BARB UP", 0x02, "Sup_Arrows_B"),
    c(0x2969, None, "RIGHTWARDS HARPOON WITH BARB DOWN ABOVE LEFTWARDS HARPOON WITH BARB DOWN", 0x02, "Sup_Arrows_B"),
    c(0x296A, None, "LEFTWARDS HARPOON WITH BARB UP ABOVE LONG DASH", 0x02, "Sup_Arrows_B"),
    c(0x296B, None, "LEFTWARDS HARPOON WITH BARB DOWN BELOW LONG DASH", 0x02, "Sup_Arrows_B"),
    c(0x296C, None, "RIGHTWARDS HARPOON WITH BARB UP ABOVE LONG DASH", 0x02, "Sup_Arrows_B"),
    c(0x296D, None, "RIGHTWARDS HARPOON WITH BARB DOWN BELOW LONG DASH", 0x02, "Sup_Arrows_B"),
    c(0x296E, None, "UPWARDS HARPOON WITH BARB LEFT BESIDE DOWNWARDS HARPOON WITH BARB RIGHT", 0x02, "Sup_Arrows_B"),
    c(0x296F, None, "DOWNWARDS HARPOON WITH BARB LEFT BESIDE UPWARDS HARPOON WITH BARB RIGHT", 0x02, "Sup_Arrows_B"),
    c(0x2970, None, "RIGHT DOUBLE ARROW WITH ROUNDED HEAD", 0x02, "Sup_Arrows_B"),
    c(0x2971, None, "EQUALS SIGN ABOVE RIGHTWARDS ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2972, None, "TILDE OPERATOR ABOVE RIGHTWARDS ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2973, None, "LEFTWARDS ARROW ABOVE TILDE OPERATOR", 0x02, "Sup_Arrows_B"),
    c(0x2974, None, "RIGHTWARDS ARROW ABOVE TILDE OPERATOR", 0x02, "Sup_Arrows_B"),
    c(0x2975, None, "RIGHTWARDS ARROW ABOVE ALMOST EQUAL TO", 0x02, "Sup_Arrows_B"),
    c(0x2976, None, "LESS-THAN ABOVE LEFTWARDS ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2977, None, "LEFTWARDS ARROW THROUGH LESS-THAN", 0x02, "Sup_Arrows_B"),
    c(0x2978, None, "GREATER-THAN ABOVE RIGHTWARDS ARROW", 0x02, "Sup_Arrows_B"),
    c(0x2979, None, "SUBSET ABOVE RIGHTWARDS ARROW", 0x02, "Sup_Arrows_B"),
    c(0x297A, None, "LEFTWARDS ARROW THROUGH SUBSET", 0x02, "Sup_Arrows_B"),
    c(0x297B, None, "SUPERSET ABOVE LEFTWARDS ARROW", 0x02, "Sup_Arrows_B"),
    c(0x297C, None, "LEFT FISH TAIL", 0x02, "Sup_Arrows_B"),
    c(0x297D, None, "RIGHT FISH TAIL", 0x02, "Sup_Arrows_B"),
    c(0x297E, None, "UP FISH TAIL", 0x02, "Sup_Arrows_B"),
    c(0x297F, None, "DOWN FISH TAIL", 0x02, "Sup_Arrows_B"),
    c(0x2980, None, "TRIPLE VERTICAL BAR DELIMITER", 0x02, "Misc_Math_Symbols_B"),
    c(0x2981, None, "Z NOTATION SPOT", 0x02, "Misc_Math_Symbols_B"),
    c(0x2982, None, "Z NOTATION TYPE COLON", 0x02, "Misc_Math_Symbols_B"),
    c(0x2983, None, "LEFT WHITE CURLY BRACKET", 0x02, "Misc_Math_Symbols_B"),
    c(0x2984, None, "RIGHT WHITE CURLY BRACKET", 0x02, "Misc_Math_Symbols_B"),
    c(0x2985, None, "LEFT WHITE PARENTHESIS", 0x02, "Misc_Math_Symbols_B"),
    c(0x2986, None, "RIGHT WHITE PARENTHESIS", 0x02, "Misc_Math_Symbols_B"),
    c(0x2987, None, "Z NOTATION LEFT IMAGE BRACKET", 0x02, "Misc_Math_Symbols_B"),
    c(0x2988, None, "Z NOTATION RIGHT IMAGE BRACKET", 0x02, "Misc_Math_Symbols_B"),
    c(0x2989, None, "Z NOTATION LEFT BINDING BRACKET", 0x02, "Misc_Math_Symbols_B"),
    c(0x298A, None, "Z NOTATION RIGHT BINDING BRACKET", 0x02, "Misc_Math_Symbols_B"),
    c(0x298B, None, "LEFT SQUARE BRACKET WITH UNDERBAR", 0x02, "Misc_Math_Symbols_B"),
    c(0x298C, None, "RIGHT SQUARE BRACKET WITH UNDERBAR", 0x02, "Misc_Math_Symbols_B"),
    c(0x298D, None, "LEFT SQUARE BRACKET WITH TICK IN TOP CORNER", 0x02, "Misc_Math_Symbols_B"),
    c(0x298E, None, "RIGHT SQUARE BRACKET WITH TICK IN BOTTOM CORNER", 0x02, "Misc_Math_Symbols_B"),
    c(0x298F, None, "LEFT SQUARE BRACKET WITH TICK IN BOTTOM CORNER", 0x02, "Misc_Math_Symbols_B"),
    c(0x2990, None, "RIGHT SQUARE BRACKET WITH TICK IN TOP CORNER", 0x02, "Misc_Math_Symbols_B"),
    c(0x2991, None, "LEFT ANGLE BRACKET WITH DOT", 0x02, "Misc_Math_Symbols_B"),
    c(0x2992, None, "RIGHT ANGLE BRACKET WITH DOT", 0x02, "Misc_Math_Symbols_B"),
    c(0x2993, None, "LEFT ARC LESS-THAN BRACKET", 0x02, "Misc_Math_Symbols_B"),
    c(0x2994, None, "RIGHT ARC GREATER-THAN BRACKET", 0x02, "Misc_Math_Symbols_B"),
    c(0x2995, None, "DOUBLE LEFT ARC GREATER-THAN BRACKET", 0x02, "Misc_Math_Symbols_B"),
    c(0x2996, None, "DOUBLE RIGHT ARC LESS-THAN BRACKET", 0x02, "Misc_Math_Symbols_B"),
    c(0x2997, None, "LEFT BLACK TORTOISE SHELL BRACKET", 0x02, "Misc_Math_Symbols_B"),
    c(0x2998, None, "RIGHT BLACK TORTOISE SHELL BRACKET", 0x02, "Misc_Math_Symbols_B"),
    c(0x2999, None, "DOTTED FENCE", 0x02, "Misc_Math_Symbols_B"),
    c(0x299A, None, "VERTICAL ZIGZAG LINE", 0x02, "Misc_Math_Symbols_B"),
    c(0x299B, None, "MEASURED ANGLE OPENING LEFT", 0x02, "Misc_Math_Symbols_B"),
    c(0x299C, None, "RIGHT ANGLE VARIANT WITH SQUARE", 0x02, "Misc_Math_Symbols_B"),
    c(0x299D, None, "MEASURED RIGHT ANGLE WITH DOT", 0x02, "Misc_Math_Symbols_B"),
    c(0x299E, None, "ANGLE WITH S INSIDE", 0x02, "Misc_Math_Symbols_B"),
    c(0x299F, None, "ACUTE ANGLE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29A0, None, "SPHERICAL ANGLE OPENING LEFT", 0x02, "Misc_Math_Symbols_B"),
    c(0x29A1, None, "SPHERICAL ANGLE OPENING UP", 0x02, "Misc_Math_Symbols_B"),
    c(0x29A2, None, "TURNED ANGLE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29A3, None, "REVERSED ANGLE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29A4, None, "ANGLE WITH UNDERBAR", 0x02, "Misc_Math_Symbols_B"),
    c(0x29A5, None, "REVERSED ANGLE WITH UNDERBAR", 0x02, "Misc_Math_Symbols_B"),
    c(0x29A6, None, "OBLIQUE ANGLE OPENING UP", 0x02, "Misc_Math_Symbols_B"),
    c(0x29A7, None, "OBLIQUE ANGLE OPENING DOWN", 0x02, "Misc_Math_Symbols_B"),
    c(0x29A8, None, "MEASURED ANGLE WITH OPEN ARM ENDING IN ARROW POINTING UP AND RIGHT", 0x02, "Misc_Math_Symbols_B"),
    c(0x29A9, None, "MEASURED ANGLE WITH OPEN ARM ENDING IN ARROW POINTING UP AND LEFT", 0x02, "Misc_Math_Symbols_B"),
    c(0x29AA, None, "MEASURED ANGLE WITH OPEN ARM ENDING IN ARROW POINTING DOWN AND RIGHT", 0x02, "Misc_Math_Symbols_B"),
    c(0x29AB, None, "MEASURED ANGLE WITH OPEN ARM ENDING IN ARROW POINTING DOWN AND LEFT", 0x02, "Misc_Math_Symbols_B"),
    c(0x29AC, None, "MEASURED ANGLE WITH OPEN ARM ENDING IN ARROW POINTING RIGHT AND UP", 0x02, "Misc_Math_Symbols_B"),
    c(0x29AD, None, "MEASURED ANGLE WITH OPEN ARM ENDING IN ARROW POINTING LEFT AND UP", 0x02, "Misc_Math_Symbols_B"),
    c(0x29AE, None, "MEASURED ANGLE WITH OPEN ARM ENDING IN ARROW POINTING RIGHT AND DOWN", 0x02, "Misc_Math_Symbols_B"),
    c(0x29AF, None, "MEASURED ANGLE WITH OPEN ARM ENDING IN ARROW POINTING LEFT AND DOWN", 0x02, "Misc_Math_Symbols_B"),
    c(0x29B0, None, "REVERSED EMPTY SET", 0x02, "Misc_Math_Symbols_B"),
    c(0x29B1, None, "EMPTY SET WITH OVERBAR", 0x02, "Misc_Math_Symbols_B"),
    c(0x29B2, None, "EMPTY SET WITH SMALL CIRCLE ABOVE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29B3, None, "EMPTY SET WITH RIGHT ARROW ABOVE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29B4, None, "EMPTY SET WITH LEFT ARROW ABOVE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29B5, None, "CIRCLE WITH HORIZONTAL BAR", 0x02, "Misc_Math_Symbols_B"),
    c(0x29B6, None, "CIRCLED VERTICAL BAR", 0x02, "Misc_Math_Symbols_B"),
    c(0x29B7, None, "CIRCLED PARALLEL", 0x02, "Misc_Math_Symbols_B"),
    c(0x29B8, None, "CIRCLED REVERSE SOLIDUS", 0x02, "Misc_Math_Symbols_B"),
    c(0x29B9, None, "CIRCLED PERPENDICULAR", 0x02, "Misc_Math_Symbols_B"),
    c(0x29BA, None, "CIRCLE DIVIDED BY HORIZONTAL BAR AND TOP HALF DIVIDED BY VERTICAL BAR", 0x02, "Misc_Math_Symbols_B"),
    c(0x29BB, None, "CIRCLE WITH SUPERIMPOSED X", 0x02, "Misc_Math_Symbols_B"),
    c(0x29BC, None, "CIRCLED ANTICLOCKWISE-ROTATED DIVISION SIGN", 0x02, "Misc_Math_Symbols_B"),
    c(0x29BD, None, "UP ARROW THROUGH CIRCLE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29BE, None, "CIRCLED WHITE BULLET", 0x02, "Misc_Math_Symbols_B"),
    c(0x29BF, None, "CIRCLED BULLET", 0x02, "Misc_Math_Symbols_B"),
    c(0x29C0, None, "CIRCLED LESS-THAN", 0x02, "Misc_Math_Symbols_B"),
    c(0x29C1, None, "CIRCLED GREATER-THAN", 0x02, "Misc_Math_Symbols_B"),
    c(0x29C2, None, "CIRCLE WITH SMALL CIRCLE TO THE RIGHT", 0x02, "Misc_Math_Symbols_B"),
    c(0x29C3, None, "CIRCLE WITH TWO HORIZONTAL STROKES TO THE RIGHT", 0x02, "Misc_Math_Symbols_B"),
    c(0x29C4, None, "SQUARED RISING DIAGONAL SLASH", 0x02, "Misc_Math_Symbols_B"),
    c(0x29C5, None, "SQUARED FALLING DIAGONAL SLASH", 0x02, "Misc_Math_Symbols_B"),
    c(0x29C6, None, "SQUARED ASTERISK", 0x02, "Misc_Math_Symbols_B"),
    c(0x29C7, None, "SQUARED SMALL CIRCLE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29C8, None, "SQUARED SQUARE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29C9, None, "TWO JOINED SQUARES", 0x02, "Misc_Math_Symbols_B"),
    c(0x29CA, None, "TRIANGLE WITH DOT ABOVE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29CB, None, "TRIANGLE WITH UNDERBAR", 0x02, "Misc_Math_Symbols_B"),
    c(0x29CC, None, "S IN TRIANGLE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29CD, None, "TRIANGLE WITH SERIFS AT BOTTOM", 0x02, "Misc_Math_Symbols_B"),
    c(0x29CE, None, "RIGHT TRIANGLE ABOVE LEFT TRIANGLE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29CF, None, "LEFT TRIANGLE BESIDE VERTICAL BAR", 0x02, "Misc_Math_Symbols_B"),
    c(0x29D0, None, "VERTICAL BAR BESIDE RIGHT TRIANGLE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29D1, None, "BOWTIE WITH LEFT HALF BLACK", 0x02, "Misc_Math_Symbols_B"),
    c(0x29D2, None, "BOWTIE WITH RIGHT HALF BLACK", 0x02, "Misc_Math_Symbols_B"),
    c(0x29D3, None, "BLACK BOWTIE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29D4, None, "TIMES WITH LEFT HALF BLACK", 0x02, "Misc_Math_Symbols_B"),
    c(0x29D5, None, "TIMES WITH RIGHT HALF BLACK", 0x02, "Misc_Math_Symbols_B"),
    c(0x29D6, None, "WHITE HOURGLASS", 0x02, "Misc_Math_Symbols_B"),
    c(0x29D7, None, "BLACK HOURGLASS", 0x02, "Misc_Math_Symbols_B"),
    c(0x29D8, None, "LEFT WIGGLY FENCE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29D9, None, "RIGHT WIGGLY FENCE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29DA, None, "LEFT DOUBLE WIGGLY FENCE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29DB, None, "RIGHT DOUBLE WIGGLY FENCE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29DC, None, "INCOMPLETE INFINITY", 0x02, "Misc_Math_Symbols_B"),
    c(0x29DD, None, "TIE OVER INFINITY", 0x02, "Misc_Math_Symbols_B"),
    c(0x29DE, None, "INFINITY NEGATED WITH VERTICAL BAR", 0x02, "Misc_Math_Symbols_B"),
    c(0x29DF, None, "DOUBLE-ENDED MULTIMAP", 0x02, "Misc_Math_Symbols_B"),
    c(0x29E0, None, "SQUARE WITH CONTOURED OUTLINE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29E1, None, "INCREASES AS", 0x02, "Misc_Math_Symbols_B"),
    c(0x29E2, None, "SHUFFLE PRODUCT", 0x02, "Misc_Math_Symbols_B"),
    c(0x29E3, None, "EQUALS SIGN AND SLANTED PARALLEL", 0x02, "Misc_Math_Symbols_B"),
    c(0x29E4, None, "EQUALS SIGN AND SLANTED PARALLEL WITH TILDE ABOVE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29E5, None, "IDENTICAL TO AND SLANTED PARALLEL", 0x02, "Misc_Math_Symbols_B"),
    c(0x29E6, None, "GLEICH STARK", 0x02, "Misc_Math_Symbols_B"),
    c(0x29E7, None, "THERMODYNAMIC", 0x02, "Misc_Math_Symbols_B"),
    c(0x29E8, None, "DOWN-POINTING TRIANGLE WITH LEFT HALF BLACK", 0x02, "Misc_Math_Symbols_B"),
    c(0x29E9, None, "DOWN-POINTING TRIANGLE WITH RIGHT HALF BLACK", 0x02, "Misc_Math_Symbols_B"),
    c(0x29EA, None, "BLACK DIAMOND WITH DOWN ARROW", 0x02, "Misc_Math_Symbols_B"),
    c(0x29EB, None, "BLACK LOZENGE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29EC, None, "WHITE CIRCLE WITH DOWN ARROW", 0x02, "Misc_Math_Symbols_B"),
    c(0x29ED, None, "BLACK CIRCLE WITH DOWN ARROW", 0x02, "Misc_Math_Symbols_B"),
    c(0x29EE, None, "ERROR-BARRED WHITE SQUARE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29EF, None, "ERROR-BARRED BLACK SQUARE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29F0, None, "ERROR-BARRED WHITE DIAMOND", 0x02, "Misc_Math_Symbols_B"),
    c(0x29F1, None, "ERROR-BARRED BLACK DIAMOND", 0x02, "Misc_Math_Symbols_B"),
    c(0x29F2, None, "ERROR-BARRED WHITE CIRCLE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29F3, None, "ERROR-BARRED BLACK CIRCLE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29F4, None, "RULE-DELAYED", 0x02, "Misc_Math_Symbols_B"),
    c(0x29F5, None, "REVERSE SOLIDUS OPERATOR", 0x02, "Misc_Math_Symbols_B"),
    c(0x29F6, None, "SOLIDUS WITH OVERBAR", 0x02, "Misc_Math_Symbols_B"),
    c(0x29F7, None, "REVERSE SOLIDUS WITH HORIZONTAL STROKE", 0x02, "Misc_Math_Symbols_B"),
    c(0x29F8, None, "BIG SOLIDUS", 0x02, "Misc_Math_Symbols_B"),
    c(0x29F9, None, "BIG REVERSE SOLIDUS", 0x02, "Misc_Math_Symbols_B"),
    c(0x29FA, None, "DOUBLE PLUS", 0x02, "Misc_Math_Symbols_B"),
    c(0x29FB, None, "TRIPLE PLUS", 0x02, "Misc_Math_Symbols_B"),
    c(0x29FC, None, "LEFT-POINTING CURVED ANGLE BRACKET", 0x02, "Misc_Math_Symbols_B"),
    c(0x29FD, None, "RIGHT-POINTING CURVED ANGLE BRACKET", 0x02, "Misc_Math_Symbols_B"),
    c(0x29FE, None, "TINY", 0x02, "Misc_Math_Symbols_B"),
    c(0x29FF, None, "MINY", 0x02, "Misc_Math_Symbols_B"),
    c(0x2A00, None, "N-ARY CIRCLED DOT OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2A01, None, "N-ARY CIRCLED PLUS OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2A02, None, "N-ARY CIRCLED TIMES OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2A03, None, "N-ARY UNION OPERATOR WITH DOT", 0x02, "Sup_Math_Operators"),
    c(0x2A04, None, "N-ARY UNION OPERATOR WITH PLUS", 0x02, "Sup_Math_Operators"),
    c(0x2A05, None, "N-ARY SQUARE INTERSECTION OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2A06, None, "N-ARY SQUARE UNION OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2A07, None, "TWO LOGICAL AND OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2A08, None, "TWO LOGICAL OR OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2A09, None, "N-ARY TIMES OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2A0A, None, "MODULO TWO SUM", 0x02, "Sup_Math_Operators"),
    c(0x2A0B, None, "SUMMATION WITH INTEGRAL", 0x02, "Sup_Math_Operators"),
    c(0x2A0C, None, "QUADRUPLE INTEGRAL OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2A0D, None, "FINITE PART INTEGRAL", 0x02, "Sup_Math_Operators"),
    c(0x2A0E, None, "INTEGRAL WITH DOUBLE STROKE", 0x02, "Sup_Math_Operators"),
    c(0x2A0F, None, "INTEGRAL AVERAGE WITH SLASH", 0x02, "Sup_Math_Operators"),
    c(0x2A10, None, "CIRCULATION FUNCTION", 0x02, "Sup_Math_Operators"),
    c(0x2A11, None, "ANTICLOCKWISE INTEGRATION", 0x02, "Sup_Math_Operators"),
    c(0x2A12, None, "LINE INTEGRATION WITH RECTANGULAR PATH AROUND POLE", 0x02, "Sup_Math_Operators"),
    c(0x2A13, None, "LINE INTEGRATION WITH SEMICIRCULAR PATH AROUND POLE", 0x02, "Sup_Math_Operators"),
    c(0x2A14, None, "LINE INTEGRATION NOT INCLUDING THE POLE", 0x02, "Sup_Math_Operators"),
    c(0x2A15, None, "INTEGRAL AROUND A POINT OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2A16, None, "QUATERNION INTEGRAL OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2A17, None, "INTEGRAL WITH LEFTWARDS ARROW WITH HOOK", 0x02, "Sup_Math_Operators"),
    c(0x2A18, None, "INTEGRAL WITH TIMES SIGN", 0x02, "Sup_Math_Operators"),
    c(0x2A19, None, "INTEGRAL WITH INTERSECTION", 0x02, "Sup_Math_Operators"),
    c(0x2A1A, None, "INTEGRAL WITH UNION", 0x02, "Sup_Math_Operators"),
    c(0x2A1B, None, "INTEGRAL WITH OVERBAR", 0x02, "Sup_Math_Operators"),
    c(0x2A1C, None, "INTEGRAL WITH UNDERBAR", 0x02, "Sup_Math_Operators"),
    c(0x2A1D, None, "JOIN", 0x02, "Sup_Math_Operators"),
    c(0x2A1E, None, "LARGE LEFT TRIANGLE OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2A1F, None, "Z NOTATION SCHEMA COMPOSITION", 0x02, "Sup_Math_Operators"),
    c(0x2A20, None, "Z NOTATION SCHEMA PIPING", 0x02, "Sup_Math_Operators"),
    c(0x2A21, None, "Z NOTATION SCHEMA PROJECTION", 0x02, "Sup_Math_Operators"),
    c(0x2A22, None, "PLUS SIGN WITH SMALL CIRCLE ABOVE", 0x02, "Sup_Math_Operators"),
    c(0x2A23, None, "PLUS SIGN WITH CIRCUMFLEX ACCENT ABOVE", 0x02, "Sup_Math_Operators"),
    c(0x2A24, None, "PLUS SIGN WITH TILDE ABOVE", 0x02, "Sup_Math_Operators"),
    c(0x2A25, None, "PLUS SIGN WITH DOT BELOW", 0x02, "Sup_Math_Operators"),
    c(0x2A26, None, "PLUS SIGN WITH TILDE BELOW", 0x02, "Sup_Math_Operators"),
    c(0x2A27, None, "PLUS SIGN WITH SUBSCRIPT TWO", 0x02, "Sup_Math_Operators"),
    c(0x2A28, None, "PLUS SIGN WITH BLACK TRIANGLE", 0x02, "Sup_Math_Operators"),
    c(0x2A29, None, "MINUS SIGN WITH COMMA ABOVE", 0x02, "Sup_Math_Operators"),
    c(0x2A2A, None, "MINUS SIGN WITH DOT BELOW", 0x02, "Sup_Math_Operators"),
    c(0x2A2B, None, "MINUS SIGN WITH FALLING DOTS", 0x02, "Sup_Math_Operators"),
    c(0x2A2C, None, "MINUS SIGN WITH RISING DOTS", 0x02, "Sup_Math_Operators"),
    c(0x2A2D, None, "PLUS SIGN IN LEFT HALF CIRCLE", 0x02, "Sup_Math_Operators"),
    c(0x2A2E, None, "PLUS SIGN IN RIGHT HALF CIRCLE", 0x02, "Sup_Math_Operators"),
    c(0x2A2F, None, "VECTOR OR CROSS PRODUCT", 0x02, "Sup_Math_Operators"),
    c(0x2A30, None, "MULTIPLICATION SIGN WITH DOT ABOVE", 0x02, "Sup_Math_Operators"),
    c(0x2A31, None, "MULTIPLICATION SIGN WITH UNDERBAR", 0x02, "Sup_Math_Operators"),
    c(0x2A32, None, "SEMIDIRECT PRODUCT WITH BOTTOM CLOSED", 0x02, "Sup_Math_Operators"),
    c(0x2A33, None, "SMASH PRODUCT", 0x02, "Sup_Math_Operators"),
    c(0x2A34, None, "MULTIPLICATION SIGN IN LEFT HALF CIRCLE", 0x02, "Sup_Math_Operators"),
    c(0x2A35, None, "MULTIPLICATION SIGN IN RIGHT HALF CIRCLE", 0x02, "Sup_Math_Operators"),
    c(0x2A36, None, "CIRCLED MULTIPLICATION SIGN WITH CIRCUMFLEX ACCENT", 0x02, "Sup_Math_Operators"),
    c(0x2A37, None, "MULTIPLICATION SIGN IN DOUBLE CIRCLE", 0x02, "Sup_Math_Operators"),
    c(0x2A38, None, "CIRCLED DIVISION SIGN", 0x02, "Sup_Math_Operators"),
    c(0x2A39, None, "PLUS SIGN IN TRIANGLE", 0x02, "Sup_Math_Operators"),
    c(0x2A3A, None, "MINUS SIGN IN TRIANGLE", 0x02, "Sup_Math_Operators"),
    c(0x2A3B, None, "MULTIPLICATION SIGN IN TRIANGLE", 0x02, "Sup_Math_Operators"),
    c(0x2A3C, None, "INTERIOR PRODUCT", 0x02, "Sup_Math_Operators"),
    c(0x2A3D, None, "RIGHTHAND INTERIOR PRODUCT", 0x02, "Sup_Math_Operators"),
    c(0x2A3E, None, "Z NOTATION RELATIONAL COMPOSITION", 0x02, "Sup_Math_Operators"),
    c(0x2A3F, None, "AMALGAMATION OR COPRODUCT", 0x02, "Sup_Math_Operators"),
    c(0x2A40, None, "INTERSECTION WITH DOT", 0x02, "Sup_Math_Operators"),
    c(0x2A41, None, "UNION WITH MINUS SIGN", 0x02, "Sup_Math_Operators"),
    c(0x2A42, None, "UNION WITH OVERBAR", 0x02, "Sup_Math_Operators"),
    c(0x2A43, None, "INTERSECTION WITH OVERBAR", 0x02, "Sup_Math_Operators"),
    c(0x2A44, None, "INTERSECTION WITH LOGICAL AND", 0x02, "Sup_Math_Operators"),
    c(0x2A45, None, "UNION WITH LOGICAL OR", 0x02, "Sup_Math_Operators"),
    c(0x2A46, None, "UNION ABOVE INTERSECTION", 0x02, "Sup_Math_Operators"),
    c(0x2A47, None, "INTERSECTION ABOVE UNION", 0x02, "Sup_Math_Operators"),
    c(0x2A48, None, "UNION ABOVE BAR ABOVE INTERSECTION", 0x02, "Sup_Math_Operators"),
    c(0x2A49, None, "INTERSECTION ABOVE BAR ABOVE UNION", 0x02, "Sup_Math_Operators"),
    c(0x2A4A, None, "UNION BESIDE AND JOINED WITH UNION", 0x02, "Sup_Math_Operators"),
    c(0x2A4B, None, "INTERSECTION BESIDE AND JOINED WITH INTERSECTION", 0x02, "Sup_Math_Operators"),
    c(0x2A4C, None, "CLOSED UNION WITH SERIFS", 0x02, "Sup_Math_Operators"),
    c(0x2A4D, None, "CLOSED INTERSECTION WITH SERIFS", 0x02, "Sup_Math_Operators"),
    c(0x2A4E, None, "DOUBLE SQUARE INTERSECTION", 0x02, "Sup_Math_Operators"),
    c(0x2A4F, None, "DOUBLE SQUARE UNION", 0x02, "Sup_Math_Operators"),
    c(0x2A50, None, "CLOSED UNION WITH SERIFS AND SMASH PRODUCT", 0x02, "Sup_Math_Operators"),
    c(0x2A51, None, "LOGICAL AND WITH DOT ABOVE", 0x02, "Sup_Math_Operators"),
    c(0x2A52, None, "LOGICAL OR WITH DOT ABOVE", 0x02, "Sup_Math_Operators"),
    c(0x2A53, None, "DOUBLE LOGICAL AND", 0x02, "Sup_Math_Operators"),
    c(0x2A54, None, "DOUBLE LOGICAL OR", 0x02, "Sup_Math_Operators"),
    c(0x2A55, None, "TWO INTERSECTING LOGICAL AND", 0x02, "Sup_Math_Operators"),
    c(0x2A56, None, "TWO INTERSECTING LOGICAL OR", 0x02, "Sup_Math_Operators"),
    c(0x2A57, None, "SLOPING LARGE OR", 0x02, "Sup_Math_Operators"),
    c(0x2A58, None, "SLOPING LARGE AND", 0x02, "Sup_Math_Operators"),
    c(0x2A59, None, "LOGICAL OR OVERLAPPING LOGICAL AND", 0x02, "Sup_Math_Operators"),
    c(0x2A5A, None, "LOGICAL AND WITH MIDDLE STEM", 0x02, "Sup_Math_Operators"),
    c(0x2A5B, None, "LOGICAL OR WITH MIDDLE STEM", 0x02, "Sup_Math_Operators"),
    c(0x2A5C, None, "LOGICAL AND WITH HORIZONTAL DASH", 0x02, "Sup_Math_Operators"),
    c(0x2A5D, None, "LOGICAL OR WITH HORIZONTAL DASH", 0x02, "Sup_Math_Operators"),
    c(0x2A5E, None, "LOGICAL AND WITH DOUBLE OVERBAR", 0x02, "Sup_Math_Operators"),
    c(0x2A5F, None, "LOGICAL AND WITH UNDERBAR", 0x02, "Sup_Math_Operators"),
    c(0x2A60, None, "LOGICAL AND WITH DOUBLE UNDERBAR", 0x02, "Sup_Math_Operators"),
    c(0x2A61, None, "SMALL VEE WITH UNDERBAR", 0x02, "Sup_Math_Operators"),
    c(0x2A62, None, "LOGICAL OR WITH DOUBLE OVERBAR", 0x02, "Sup_Math_Operators"),
    c(0x2A63, None, "LOGICAL OR WITH DOUBLE UNDERBAR", 0x02, "Sup_Math_Operators"),
    c(0x2A64, None, "Z NOTATION DOMAIN ANTIRESTRICTION", 0x02, "Sup_Math_Operators"),
    c(0x2A65, None, "Z NOTATION RANGE ANTIRESTRICTION", 0x02, "Sup_Math_Operators"),
    c(0x2A66, None, "EQUALS SIGN WITH DOT BELOW", 0x02, "Sup_Math_Operators"),
    c(0x2A67, None, "IDENTICAL WITH DOT ABOVE", 0x02, "Sup_Math_Operators"),
    c(0x2A68, None, "TRIPLE HORIZONTAL BAR WITH DOUBLE VERTICAL STROKE", 0x02, "Sup_Math_Operators"),
    c(0x2A69, None, "TRIPLE HORIZONTAL BAR WITH TRIPLE VERTICAL STROKE", 0x02, "Sup_Math_Operators"),
    c(0x2A6A, None, "TILDE OPERATOR WITH DOT ABOVE", 0x02, "Sup_Math_Operators"),
    c(0x2A6B, None, "TILDE OPERATOR WITH RISING DOTS", 0x02, "Sup_Math_Operators"),
    c(0x2A6C, None, "SIMILAR MINUS SIMILAR", 0x02, "Sup_Math_Operators"),
    c(0x2A6D, None, "CONGRUENT WITH DOT ABOVE", 0x02, "Sup_Math_Operators"),
    c(0x2A6E, None, "EQUALS WITH ASTERISK", 0x02, "Sup_Math_Operators"),
    c(0x2A6F, None, "ALMOST EQUAL TO WITH CIRCUMFLEX ACCENT", 0x02, "Sup_Math_Operators"),
    c(0x2A70, None, "APPROXIMATELY EQUAL OR EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2A71, None, "EQUALS SIGN ABOVE PLUS SIGN", 0x02, "Sup_Math_Operators"),
    c(0x2A72, None, "PLUS SIGN ABOVE EQUALS SIGN", 0x02, "Sup_Math_Operators"),
    c(0x2A73, None, "EQUALS SIGN ABOVE TILDE OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2A74, None, "DOUBLE COLON EQUAL", 0x02, "Sup_Math_Operators"),
    c(0x2A75, None, "TWO CONSECUTIVE EQUALS SIGNS", 0x02, "Sup_Math_Operators"),
    c(0x2A76, None, "THREE CONSECUTIVE EQUALS SIGNS", 0x02, "Sup_Math_Operators"),
    c(0x2A77, None, "EQUALS SIGN WITH TWO DOTS ABOVE AND TWO DOTS BELOW", 0x02, "Sup_Math_Operators"),
    c(0x2A78, None, "EQUIVALENT WITH FOUR DOTS ABOVE", 0x02, "Sup_Math_Operators"),
    c(0x2A79, None, "LESS-THAN WITH CIRCLE INSIDE", 0x02, "Sup_Math_Operators"),
    c(0x2A7A, None, "GREATER-THAN WITH CIRCLE INSIDE", 0x02, "Sup_Math_Operators"),
    c(0x2A7B, None, "LESS-THAN WITH QUESTION MARK ABOVE", 0x02, "Sup_Math_Operators"),
    c(0x2A7C, None, "GREATER-THAN WITH QUESTION MARK ABOVE", 0x02, "Sup_Math_Operators"),
    c(0x2A7D, None, "LESS-THAN OR SLANTED EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2A7E, None, "GREATER-THAN OR SLANTED EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2A7F, None, "LESS-THAN OR SLANTED EQUAL TO WITH DOT INSIDE", 0x02, "Sup_Math_Operators"),
    c(0x2A80, None, "GREATER-THAN OR SLANTED EQUAL TO WITH DOT INSIDE", 0x02, "Sup_Math_Operators"),
    c(0x2A81, None, "LESS-THAN OR SLANTED EQUAL TO WITH DOT ABOVE", 0x02, "Sup_Math_Operators"),
    c(0x2A82, None, "GREATER-THAN OR SLANTED EQUAL TO WITH DOT ABOVE", 0x02, "Sup_Math_Operators"),
    c(0x2A83, None, "LESS-THAN OR SLANTED EQUAL TO WITH DOT ABOVE RIGHT", 0x02, "Sup_Math_Operators"),
    c(0x2A84, None, "GREATER-THAN OR SLANTED EQUAL TO WITH DOT ABOVE LEFT", 0x02, "Sup_Math_Operators"),
    c(0x2A85, None, "LESS-THAN OR APPROXIMATE", 0x02, "Sup_Math_Operators"),
    c(0x2A86, None, "GREATER-THAN OR APPROXIMATE", 0x02, "Sup_Math_Operators"),
    c(0x2A87, None, "LESS-THAN AND SINGLE-LINE NOT EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2A88, None, "GREATER-THAN AND SINGLE-LINE NOT EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2A89, None, "LESS-THAN AND NOT APPROXIMATE", 0x02, "Sup_Math_Operators"),
    c(0x2A8A, None, "GREATER-THAN AND NOT APPROXIMATE", 0x02, "Sup_Math_Operators"),
    c(0x2A8B, None, "LESS-THAN ABOVE DOUBLE-LINE EQUAL ABOVE GREATER-THAN", 0x02, "Sup_Math_Operators"),
    c(0x2A8C, None, "GREATER-THAN ABOVE DOUBLE-LINE EQUAL ABOVE LESS-THAN", 0x02, "Sup_Math_Operators"),
    c(0x2A8D, None, "LESS-THAN ABOVE SIMILAR OR EQUAL", 0x02, "Sup_Math_Operators"),
    c(0x2A8E, None, "GREATER-THAN ABOVE SIMILAR OR EQUAL", 0x02, "Sup_Math_Operators"),
    c(0x2A8F, None, "LESS-THAN ABOVE SIMILAR ABOVE GREATER-THAN", 0x02, "Sup_Math_Operators"),
    c(0x2A90, None, "GREATER-THAN ABOVE SIMILAR ABOVE LESS-THAN", 0x02, "Sup_Math_Operators"),
    c(0x2A91, None, "LESS-THAN ABOVE GREATER-THAN ABOVE DOUBLE-LINE EQUAL", 0x02, "Sup_Math_Operators"),
    c(0x2A92, None, "GREATER-THAN ABOVE LESS-THAN ABOVE DOUBLE-LINE EQUAL", 0x02, "Sup_Math_Operators"),
    c(0x2A93, None, "LESS-THAN ABOVE SLANTED EQUAL ABOVE GREATER-THAN ABOVE SLANTED EQUAL", 0x02, "Sup_Math_Operators"),
    c(0x2A94, None, "GREATER-THAN ABOVE SLANTED EQUAL ABOVE LESS-THAN ABOVE SLANTED EQUAL", 0x02, "Sup_Math_Operators"),
    c(0x2A95, None, "SLANTED EQUAL TO OR LESS-THAN", 0x02, "Sup_Math_Operators"),
    c(0x2A96, None, "SLANTED EQUAL TO OR GREATER-THAN", 0x02, "Sup_Math_Operators"),
    c(0x2A97, None, "SLANTED EQUAL TO OR LESS-THAN WITH DOT INSIDE", 0x02, "Sup_Math_Operators"),
    c(0x2A98, None, "SLANTED EQUAL TO OR GREATER-THAN WITH DOT INSIDE", 0x02, "Sup_Math_Operators"),
    c(0x2A99, None, "DOUBLE-LINE EQUAL TO OR LESS-THAN", 0x02, "Sup_Math_Operators"),
    c(0x2A9A, None, "DOUBLE-LINE EQUAL TO OR GREATER-THAN", 0x02, "Sup_Math_Operators"),
    c(0x2A9B, None, "DOUBLE-LINE SLANTED EQUAL TO OR LESS-THAN", 0x02, "Sup_Math_Operators"),
    c(0x2A9C, None, "DOUBLE-LINE SLANTED EQUAL TO OR GREATER-THAN", 0x02, "Sup_Math_Operators"),
    c(0x2A9D, None, "SIMILAR OR LESS-THAN", 0x02, "Sup_Math_Operators"),
    c(0x2A9E, None, "SIMILAR OR GREATER-THAN", 0x02, "Sup_Math_Operators"),
    c(0x2A9F, None, "SIMILAR ABOVE LESS-THAN ABOVE EQUALS SIGN", 0x02, "Sup_Math_Operators"),
    c(0x2AA0, None, "SIMILAR ABOVE GREATER-THAN ABOVE EQUALS SIGN", 0x02, "Sup_Math_Operators"),
    c(0x2AA1, None, "DOUBLE NESTED LESS-THAN", 0x02, "Sup_Math_Operators"),
    c(0x2AA2, None, "DOUBLE NESTED GREATER-THAN", 0x02, "Sup_Math_Operators"),
    c(0x2AA3, None, "DOUBLE NESTED LESS-THAN WITH UNDERBAR", 0x02, "Sup_Math_Operators"),
    c(0x2AA4, None, "GREATER-THAN OVERLAPPING LESS-THAN", 0x02, "Sup_Math_Operators"),
    c(0x2AA5, None, "GREATER-THAN BESIDE LESS-THAN", 0x02, "Sup_Math_Operators"),
    c(0x2AA6, None, "LESS-THAN CLOSED BY CURVE", 0x02, "Sup_Math_Operators"),
    c(0x2AA7, None, "GREATER-THAN CLOSED BY CURVE", 0x02, "Sup_Math_Operators"),
    c(0x2AA8, None, "LESS-THAN CLOSED BY CURVE ABOVE SLANTED EQUAL", 0x02, "Sup_Math_Operators"),
    c(0x2AA9, None, "GREATER-THAN CLOSED BY CURVE ABOVE SLANTED EQUAL", 0x02, "Sup_Math_Operators"),
    c(0x2AAA, None, "SMALLER THAN", 0x02, "Sup_Math_Operators"),
    c(0x2AAB, None, "LARGER THAN", 0x02, "Sup_Math_Operators"),
    c(0x2AAC, None, "SMALLER THAN OR EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2AAD, None, "LARGER THAN OR EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2AAE, None, "EQUALS SIGN WITH BUMPY ABOVE", 0x02, "Sup_Math_Operators"),
    c(0x2AAF, None, "PRECEDES ABOVE SINGLE-LINE EQUALS SIGN", 0x02, "Sup_Math_Operators"),
    c(0x2AB0, None, "SUCCEEDS ABOVE SINGLE-LINE EQUALS SIGN", 0x02, "Sup_Math_Operators"),
    c(0x2AB1, None, "PRECEDES ABOVE SINGLE-LINE NOT EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2AB2, None, "SUCCEEDS ABOVE SINGLE-LINE NOT EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2AB3, None, "PRECEDES ABOVE EQUALS SIGN", 0x02, "Sup_Math_Operators"),
    c(0x2AB4, None, "SUCCEEDS ABOVE EQUALS SIGN", 0x02, "Sup_Math_Operators"),
    c(0x2AB5, None, "PRECEDES ABOVE NOT EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2AB6, None, "SUCCEEDS ABOVE NOT EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2AB7, None, "PRECEDES ABOVE ALMOST EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2AB8, None, "SUCCEEDS ABOVE ALMOST EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2AB9, None, "PRECEDES ABOVE NOT ALMOST EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2ABA, None, "SUCCEEDS ABOVE NOT ALMOST EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2ABB, None, "DOUBLE PRECEDES", 0x02, "Sup_Math_Operators"),
    c(0x2ABC, None, "DOUBLE SUCCEEDS", 0x02, "Sup_Math_Operators"),
    c(0x2ABD, None, "SUBSET WITH DOT", 0x02, "Sup_Math_Operators"),
    c(0x2ABE, None, "SUPERSET WITH DOT", 0x02, "Sup_Math_Operators"),
    c(0x2ABF, None, "SUBSET WITH PLUS SIGN BELOW", 0x02, "Sup_Math_Operators"),
    c(0x2AC0, None, "SUPERSET WITH PLUS SIGN BELOW", 0x02, "Sup_Math_Operators"),
    c(0x2AC1, None, "SUBSET WITH MULTIPLICATION SIGN BELOW", 0x02, "Sup_Math_Operators"),
    c(0x2AC2, None, "SUPERSET WITH MULTIPLICATION SIGN BELOW", 0x02, "Sup_Math_Operators"),
    c(0x2AC3, None, "SUBSET OF OR EQUAL TO WITH DOT ABOVE", 0x02, "Sup_Math_Operators"),
    c(0x2AC4, None, "SUPERSET OF OR EQUAL TO WITH DOT ABOVE", 0x02, "Sup_Math_Operators"),
    c(0x2AC5, None, "SUBSET OF ABOVE EQUALS SIGN", 0x02, "Sup_Math_Operators"),
    c(0x2AC6, None, "SUPERSET OF ABOVE EQUALS SIGN", 0x02, "Sup_Math_Operators"),
    c(0x2AC7, None, "SUBSET OF ABOVE TILDE OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2AC8, None, "SUPERSET OF ABOVE TILDE OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2AC9, None, "SUBSET OF ABOVE ALMOST EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2ACA, None, "SUPERSET OF ABOVE ALMOST EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2ACB, None, "SUBSET OF ABOVE NOT EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2ACC, None, "SUPERSET OF ABOVE NOT EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2ACD, None, "SQUARE LEFT OPEN BOX OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2ACE, None, "SQUARE RIGHT OPEN BOX OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2ACF, None, "CLOSED SUBSET", 0x02, "Sup_Math_Operators"),
    c(0x2AD0, None, "CLOSED SUPERSET", 0x02, "Sup_Math_Operators"),
    c(0x2AD1, None, "CLOSED SUBSET OR EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2AD2, None, "CLOSED SUPERSET OR EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2AD3, None, "SUBSET ABOVE SUPERSET", 0x02, "Sup_Math_Operators"),
    c(0x2AD4, None, "SUPERSET ABOVE SUBSET", 0x02, "Sup_Math_Operators"),
    c(0x2AD5, None, "SUBSET ABOVE SUBSET", 0x02, "Sup_Math_Operators"),
    c(0x2AD6, None, "SUPERSET ABOVE SUPERSET", 0x02, "Sup_Math_Operators"),
    c(0x2AD7, None, "SUPERSET BESIDE SUBSET", 0x02, "Sup_Math_Operators"),
    c(0x2AD8, None, "SUPERSET BESIDE AND JOINED BY DASH WITH SUBSET", 0x02, "Sup_Math_Operators"),
    c(0x2AD9, None, "ELEMENT OF OPENING DOWNWARDS", 0x02, "Sup_Math_Operators"),
    c(0x2ADA, None, "PITCHFORK WITH TEE TOP", 0x02, "Sup_Math_Operators"),
    c(0x2ADB, None, "TRANSVERSAL INTERSECTION", 0x02, "Sup_Math_Operators"),
    c(0x2ADC, None, "FORKING", 0x02, "Sup_Math_Operators"),
    c(0x2ADD, None, "NONFORKING", 0x02, "Sup_Math_Operators"),
    c(0x2ADE, None, "SHORT LEFT TACK", 0x02, "Sup_Math_Operators"),
    c(0x2ADF, None, "SHORT DOWN TACK", 0x02, "Sup_Math_Operators"),
    c(0x2AE0, None, "SHORT UP TACK", 0x02, "Sup_Math_Operators"),
    c(0x2AE1, None, "PERPENDICULAR WITH S", 0x02, "Sup_Math_Operators"),
    c(0x2AE2, None, "VERTICAL BAR TRIPLE RIGHT TURNSTILE", 0x02, "Sup_Math_Operators"),
    c(0x2AE3, None, "DOUBLE VERTICAL BAR LEFT TURNSTILE", 0x02, "Sup_Math_Operators"),
    c(0x2AE4, None, "VERTICAL BAR DOUBLE LEFT TURNSTILE", 0x02, "Sup_Math_Operators"),
    c(0x2AE5, None, "DOUBLE VERTICAL BAR DOUBLE LEFT TURNSTILE", 0x02, "Sup_Math_Operators"),
    c(0x2AE6, None, "LONG DASH FROM LEFT MEMBER OF DOUBLE VERTICAL", 0x02, "Sup_Math_Operators"),
    c(0x2AE7, None, "SHORT DOWN TACK WITH OVERBAR", 0x02, "Sup_Math_Operators"),
    c(0x2AE8, None, "SHORT UP TACK WITH UNDERBAR", 0x02, "Sup_Math_Operators"),
    c(0x2AE9, None, "SHORT UP TACK ABOVE SHORT DOWN TACK", 0x02, "Sup_Math_Operators"),
    c(0x2AEA, None, "DOUBLE DOWN TACK", 0x02, "Sup_Math_Operators"),
    c(0x2AEB, None, "DOUBLE UP TACK", 0x02, "Sup_Math_Operators"),
    c(0x2AEC, None, "DOUBLE STROKE NOT SIGN", 0x02, "Sup_Math_Operators"),
    c(0x2AED, None, "REVERSED DOUBLE STROKE NOT SIGN", 0x02, "Sup_Math_Operators"),
    c(0x2AEE, None, "DOES NOT DIVIDE WITH REVERSED NEGATION SLASH", 0x02, "Sup_Math_Operators"),
    c(0x2AEF, None, "VERTICAL LINE WITH CIRCLE ABOVE", 0x02, "Sup_Math_Operators"),
    c(0x2AF0, None, "VERTICAL LINE WITH CIRCLE BELOW", 0x02, "Sup_Math_Operators"),
    c(0x2AF1, None, "DOWN TACK WITH CIRCLE BELOW", 0x02, "Sup_Math_Operators"),
    c(0x2AF2, None, "PARALLEL WITH HORIZONTAL STROKE", 0x02, "Sup_Math_Operators"),
    c(0x2AF3, None, "PARALLEL WITH TILDE OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2AF4, None, "TRIPLE VERTICAL BAR BINARY RELATION", 0x02, "Sup_Math_Operators"),
    c(0x2AF5, None, "TRIPLE VERTICAL BAR WITH HORIZONTAL STROKE", 0x02, "Sup_Math_Operators"),
    c(0x2AF6, None, "TRIPLE COLON OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2AF7, None, "TRIPLE NESTED LESS-THAN", 0x02, "Sup_Math_Operators"),
    c(0x2AF8, None, "TRIPLE NESTED GREATER-THAN", 0x02, "Sup_Math_Operators"),
    c(0x2AF9, None, "DOUBLE-LINE SLANTED LESS-THAN OR EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2AFA, None, "DOUBLE-LINE SLANTED GREATER-THAN OR EQUAL TO", 0x02, "Sup_Math_Operators"),
    c(0x2AFB, None, "TRIPLE SOLIDUS BINARY RELATION", 0x02, "Sup_Math_Operators"),
    c(0x2AFC, None, "LARGE TRIPLE VERTICAL BAR OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2AFD, None, "DOUBLE SOLIDUS OPERATOR", 0x02, "Sup_Math_Operators"),
    c(0x2AFE, None, "WHITE VERTICAL BAR", 0x02, "Sup_Math_Operators"),
    c(0x2AFF, None, "N-ARY WHITE VERTICAL BAR", 0x02, "Sup_Math_Operators"),
    c(0x2B00, None, "NORTH EAST WHITE ARROW", 0x00, "Misc_Arrows"),
    c(0x2B01, None, "NORTH WEST WHITE ARROW", 0x00, "Misc_Arrows"),
    c(0x2B02, None, "SOUTH EAST WHITE ARROW", 0x00, "Misc_Arrows"),
    c(0x2B03, None, "SOUTH WEST WHITE ARROW", 0x00, "Misc_Arrows"),
    c(0x2B04, None, "LEFT RIGHT WHITE ARROW", 0x00, "Misc_Arrows"),
    c(0x2B05, None, "LEFTWARDS BLACK ARROW", 0x00, "Misc_Arrows"),
    c(0x2B06, None, "UPWARDS BLACK ARROW", 0x00, "Misc_Arrows"),
    c(0x2B07, None, "DOWNWARDS BLACK ARROW", 0x00, "Misc_Arrows"),
    c(0x2B08, None, "NORTH EAST BLACK ARROW", 0x00, "Misc_Arrows"),
    c(0x2B09, None, "NORTH WEST BLACK ARROW", 0x00, "Misc_Arrows"),
    c(0x2B0A, None, "SOUTH EAST BLACK ARROW", 0x00, "Misc_Arrows"),
    c(0x2B0B, None, "SOUTH WEST BLACK ARROW", 0x00, "Misc_Arrows"),
    c(0x2B0C, None, "LEFT RIGHT BLACK ARROW", 0x00, "Misc_Arrows"),
    c(0x2B0D, None, "UP DOWN BLACK ARROW", 0x00, "Misc_Arrows"),
    c(0x2B0E, None, "RIGHTWARDS ARROW WITH TIP DOWNWARDS", 0x00, "Misc_Arrows"),
    c(0x2B0F, None, "RIGHTWARDS ARROW WITH TIP UPWARDS", 0x00, "Misc_Arrows"),
    c(0x2B10, None, "LEFTWARDS ARROW WITH TIP DOWNWARDS", 0x00, "Misc_Arrows"),
    c(0x2B11, None, "LEFTWARDS ARROW WITH TIP UPWARDS", 0x00, "Misc_Arrows"),
    c(0x2B12, None, "SQUARE WITH TOP HALF BLACK", 0x00, "Misc_Arrows"),
    c(0x2B13, None, "SQUARE WITH BOTTOM HALF BLACK", 0x00, "Misc_Arrows"),
    c(0x2B14, None, "SQUARE WITH UPPER RIGHT DIAGONAL HALF BLACK", 0x00, "Misc_Arrows"),
    c(0x2B15, None, "SQUARE WITH LOWER LEFT DIAGONAL HALF BLACK", 0x00, "Misc_Arrows"),
    c(0x2B16, None, "DIAMOND WITH LEFT HALF BLACK", 0x00, "Misc_Arrows"),
    c(0x2B17, None, "DIAMOND WITH RIGHT HALF BLACK", 0x00, "Misc_Arrows"),
    c(0x2B18, None, "DIAMOND WITH TOP HALF BLACK", 0x00, "Misc_Arrows"),
    c(0x2B19, None, "DIAMOND WITH BOTTOM HALF BLACK", 0x00, "Misc_Arrows"),
    c(0x2B1A, None, "DOTTED SQUARE", 0x00, "Misc_Arrows"),
    c(0x2B1B, None, "BLACK LARGE SQUARE", 0x00, "Misc_Arrows"),
    c(0x2B1C, None, "WHITE LARGE SQUARE", 0x00, "Misc_Arrows"),
    c(0x2B1D, None, "BLACK VERY SMALL SQUARE", 0x00, "Misc_Arrows"),
    c(0x2B1E, None, "WHITE VERY SMALL SQUARE", 0x00, "Misc_Arrows"),
    c(0x2B1F, None, "BLACK PENTAGON", 0x00, "Misc_Arrows"),
    c(0x2B20, None, "WHITE PENTAGON", 0x00, "Misc_Arrows"),
    c(0x2B21, None, "WHITE HEXAGON", 0x00, "Misc_Arrows"),
    c(0x2B22, None, "BLACK HEXAGON", 0x00, "Misc_Arrows"),
    c(0x2B23, None, "HORIZONTAL BLACK HEXAGON", 0x00, "Misc_Arrows"),
    c(0x2B24, None, "BLACK LARGE CIRCLE", 0x00, "Misc_Arrows"),
    c(0x2B25, None, "BLACK MEDIUM DIAMOND", 0x00, "Misc_Arrows"),
    c(0x2B26, None, "WHITE MEDIUM DIAMOND", 0x00, "Misc_Arrows"),
    c(0x2B27, None, "BLACK MEDIUM LOZENGE", 0x00, "Misc_Arrows"),
    c(0x2B28, None, "WHITE MEDIUM LOZENGE", 0x00, "Misc_Arrows"),
    c(0x2B29, None, "BLACK SMALL DIAMOND", 0x00, "Misc_Arrows"),
    c(0x2B2A, None, "BLACK SMALL LOZENGE", 0x00, "Misc_Arrows"),
    c(0x2B2B, None, "WHITE SMALL LOZENGE", 0x00, "Misc_Arrows"),
    c(0x2B2C, None, "BLACK HORIZONTAL ELLIPSE", 0x00, "Misc_Arrows"),
    c(0x2B2D, None, "WHITE HORIZONTAL ELLIPSE", 0x00, "Misc_Arrows"),
    c(0x2B2E, None, "BLACK VERTICAL ELLIPSE", 0x00, "Misc_Arrows"),
    c(0x2B2F, None, "WHITE VERTICAL ELLIPSE", 0x00, "Misc_Arrows"),
    c(0x2B30, None, "LEFT ARROW WITH SMALL CIRCLE", 0x02, "Misc_Arrows"),
    c(0x2B31, None, "THREE LEFTWARDS ARROWS", 0x02, "Misc_Arrows"),
    c(0x2B32, None, "LEFT ARROW WITH CIRCLED PLUS", 0x02, "Misc_Arrows"),
    c(0x2B33, None, "LONG LEFTWARDS SQUIGGLE ARROW", 0x02, "Misc_Arrows"),
    c(0x2B34, None, "LEFTWARDS TWO-HEADED ARROW WITH VERTICAL STROKE", 0x02, "Misc_Arrows"),
    c(0x2B35, None, "LEFTWARDS TWO-HEADED ARROW WITH DOUBLE VERTICAL STROKE", 0x02, "Misc_Arrows"),
    c(0x2B36, None, "LEFTWARDS TWO-HEADED ARROW FROM BAR", 0x02, "Misc_Arrows"),
    c(0x2B37, None, "LEFTWARDS TWO-HEADED TRIPLE DASH ARROW", 0x02, "Misc_Arrows"),
    c(0x2B38, None, "LEFTWARDS ARROW WITH DOTTED STEM", 0x02, "Misc_Arrows"),
    c(0x2B39, None, "LEFTWARDS ARROW WITH TAIL WITH VERTICAL STROKE", 0x02, "Misc_Arrows"),
    c(0x2B3A, None, "LEFTWARDS ARROW WITH TAIL WITH DOUBLE VERTICAL STROKE", 0x02, "Misc_Arrows"),
    c(0x2B3B, None, "LEFTWARDS TWO-HEADED ARROW WITH TAIL", 0x02, "Misc_Arrows"),
    c(0x2B3C, None, "LEFTWARDS TWO-HEADED ARROW WITH TAIL WITH VERTICAL STROKE", 0x02, "Misc_Arrows"),
    c(0x2B3D, None, "LEFTWARDS TWO-HEADED ARROW WITH TAIL WITH DOUBLE VERTICAL STROKE", 0x02, "Misc_Arrows"),
    c(0x2B3E, None, "LEFTWARDS ARROW THROUGH X", 0x02, "Misc_Arrows"),
    c(0x2B3F, None, "WAVE ARROW POINTING DIRECTLY LEFT", 0x02, "Misc_Arrows"),
    c(0x2B40, None, "EQUALS SIGN ABOVE LEFTWARDS ARROW", 0x02, "Misc_Arrows"),
    c(0x2B41, None, "REVERSE TILDE OPERATOR ABOVE LEFTWARDS ARROW", 0x02, "Misc_Arrows"),
    c(0x2B42, None, "LEFTWARDS ARROW ABOVE REVERSE ALMOST EQUAL TO", 0x02, "Misc_Arrows"),
    c(0x2B43, None, "RIGHTWARDS ARROW THROUGH GREATER-THAN", 0x02, "Misc_Arrows"),
    c(0x2B44, None, "RIGHTWARDS ARROW THROUGH SUPERSET", 0x02, "Misc_Arrows"),
    c(0x2B45, None, "LEFTWARDS QUADRUPLE ARROW", 0x00, "Misc_Arrows"),
    c(0x2B46, None, "RIGHTWARDS QUADRUPLE ARROW", 0x00, "Misc_Arrows"),
    c(0x2B47, None, "REVERSE TILDE OPERATOR ABOVE RIGHTWARDS ARROW", 0x02, "Misc_Arrows"),
    c(0x2B48, None, "RIGHTWARDS ARROW ABOVE REVERSE ALMOST EQUAL TO", 0x02, "Misc_Arrows"),
    c(0x2B49, None, "TILDE OPERATOR ABOVE LEFTWARDS ARROW", 0x02, "Misc_Arrows"),
    c(0x2B4A, None, "LEFTWARDS ARROW ABOVE ALMOST EQUAL TO", 0x02, "Misc_Arrows"),
    c(0x2B4B, None, "LEFTWARDS ARROW ABOVE REVERSE TILDE OPERATOR", 0x02, "Misc_Arrows"),
    c(0x2B4C, None, "RIGHTWARDS ARROW ABOVE REVERSE TILDE OPERATOR", 0x02, "Misc_Arrows"),
    c(0x2B4D, None, "DOWNWARDS TRIANGLE-HEADED ZIGZAG ARROW", 0x00, "Misc_Arrows"),
    c(0x2B4E, None, "SHORT SLANTED NORTH ARROW", 0x00, "Misc_Arrows"),
    c(0x2B4F, None, "SHORT BACKSLANTED SOUTH ARROW", 0x00, "Misc_Arrows"),
    c(0x2B50, None, "WHITE MEDIUM STAR", 0x00, "Misc_Arrows"),
    c(0x2B51, None, "BLACK SMALL STAR", 0x00, "Misc_Arrows"),
    c(0x2B52, None, "WHITE SMALL STAR", 0x00, "Misc_Arrows"),
    c(0x2B53, None, "BLACK RIGHT-POINTING PENTAGON", 0x00, "Misc_Arrows"),
    c(0x2B54, None, "WHITE RIGHT-POINTING PENTAGON", 0x00, "Misc_Arrows"),
    c(0x2B55, None, "HEAVY LARGE CIRCLE", 0x00, "Misc_Arrows"),
    c(0x2B56, None, "HEAVY OVAL WITH OVAL INSIDE", 0x00, "Misc_Arrows"),
    c(0x2B57, None, "HEAVY CIRCLE WITH CIRCLE INSIDE", 0x00, "Misc_Arrows"),
    c(0x2B58, None, "HEAVY CIRCLE", 0x00, "Misc_Arrows"),
    c(0x2B59, None, "HEAVY CIRCLED SALTIRE", 0x00, "Misc_Arrows"),
    c(0x2B5A, None, "SLANTED NORTH ARROW WITH HOOKED HEAD", 0x00, "Misc_Arrows"),
    c(0x2B5B, None, "BACKSLANTED SOUTH ARROW WITH HOOKED TAIL", 0x00, "Misc_Arrows"),
    c(0x2B5C, None, "SLANTED NORTH ARROW WITH HORIZONTAL TAIL", 0x00, "Misc_Arrows"),
    c(0x2B5D, None, "BACKSLANTED SOUTH ARROW WITH HORIZONTAL TAIL", 0x00, "Misc_Arrows"),
    c(0x2B5E, None, "BENT ARROW POINTING DOWNWARDS THEN NORTH EAST", 0x00, "Misc_Arrows"),
    c(0x2B5F, None, "SHORT BENT ARROW POINTING DOWNWARDS THEN NORTH EAST", 0x00, "Misc_Arrows"),
    c(0x2B60, None, "LEFTWARDS TRIANGLE-HEADED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B61, None, "UPWARDS TRIANGLE-HEADED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B62, None, "RIGHTWARDS TRIANGLE-HEADED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B63, None, "DOWNWARDS TRIANGLE-HEADED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B64, None, "LEFT RIGHT TRIANGLE-HEADED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B65, None, "UP DOWN TRIANGLE-HEADED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B66, None, "NORTH WEST TRIANGLE-HEADED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B67, None, "NORTH EAST TRIANGLE-HEADED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B68, None, "SOUTH EAST TRIANGLE-HEADED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B69, None, "SOUTH WEST TRIANGLE-HEADED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B6A, None, "LEFTWARDS TRIANGLE-HEADED DASHED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B6B, None, "UPWARDS TRIANGLE-HEADED DASHED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B6C, None, "RIGHTWARDS TRIANGLE-HEADED DASHED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B6D, None, "DOWNWARDS TRIANGLE-HEADED DASHED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B6E, None, "CLOCKWISE TRIANGLE-HEADED OPEN CIRCLE ARROW", 0x00, "Misc_Arrows"),
    c(0x2B6F, None, "ANTICLOCKWISE TRIANGLE-HEADED OPEN CIRCLE ARROW", 0x00, "Misc_Arrows"),
    c(0x2B70, None, "LEFTWARDS TRIANGLE-HEADED ARROW TO BAR", 0x00, "Misc_Arrows"),
    c(0x2B71, None, "UPWARDS TRIANGLE-HEADED ARROW TO BAR", 0x00, "Misc_Arrows"),
    c(0x2B72, None, "RIGHTWARDS TRIANGLE-HEADED ARROW TO BAR", 0x00, "Misc_Arrows"),
    c(0x2B73, None, "DOWNWARDS TRIANGLE-HEADED ARROW TO BAR", 0x00, "Misc_Arrows"),
    c(0x2B76, None, "NORTH WEST TRIANGLE-HEADED ARROW TO BAR", 0x00, "Misc_Arrows"),
    c(0x2B77, None, "NORTH EAST TRIANGLE-HEADED ARROW TO BAR", 0x00, "Misc_Arrows"),
    c(0x2B78, None, "SOUTH EAST TRIANGLE-HEADED ARROW TO BAR", 0x00, "Misc_Arrows"),
    c(0x2B79, None, "SOUTH WEST TRIANGLE-HEADED ARROW TO BAR", 0x00, "Misc_Arrows"),
    c(0x2B7A, None, "LEFTWARDS TRIANGLE-HEADED ARROW WITH DOUBLE VERTICAL STROKE", 0x00, "Misc_Arrows"),
    c(0x2B7B, None, "UPWARDS TRIANGLE-HEADED ARROW WITH DOUBLE HORIZONTAL STROKE", 0x00, "Misc_Arrows"),
    c(0x2B7C, None, "RIGHTWARDS TRIANGLE-HEADED ARROW WITH DOUBLE VERTICAL STROKE", 0x00, "Misc_Arrows"),
    c(0x2B7D, None, "DOWNWARDS TRIANGLE-HEADED ARROW WITH DOUBLE HORIZONTAL STROKE", 0x00, "Misc_Arrows"),
    c(0x2B7E, None, "HORIZONTAL TAB KEY", 0x00, "Misc_Arrows"),
    c(0x2B7F, None, "VERTICAL TAB KEY", 0x00, "Misc_Arrows"),
    c(0x2B80, None, "LEFTWARDS TRIANGLE-HEADED ARROW OVER RIGHTWARDS TRIANGLE-HEADED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B81, None, "UPWARDS TRIANGLE-HEADED ARROW LEFTWARDS OF DOWNWARDS TRIANGLE-HEADED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B82, None, "RIGHTWARDS TRIANGLE-HEADED ARROW OVER LEFTWARDS TRIANGLE-HEADED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B83, None, "DOWNWARDS TRIANGLE-HEADED ARROW LEFTWARDS OF UPWARDS TRIANGLE-HEADED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B84, None, "LEFTWARDS TRIANGLE-HEADED PAIRED ARROWS", 0x00, "Misc_Arrows"),
    c(0x2B85, None, "UPWARDS TRIANGLE-HEADED PAIRED ARROWS", 0x00, "Misc_Arrows"),
    c(0x2B86, None, "RIGHTWARDS TRIANGLE-HEADED PAIRED ARROWS", 0x00, "Misc_Arrows"),
    c(0x2B87, None, "DOWNWARDS TRIANGLE-HEADED PAIRED ARROWS", 0x00, "Misc_Arrows"),
    c(0x2B88, None, "LEFTWARDS BLACK CIRCLED WHITE ARROW", 0x00, "Misc_Arrows"),
    c(0x2B89, None, "UPWARDS BLACK CIRCLED WHITE ARROW", 0x00, "Misc_Arrows"),
    c(0x2B8A, None, "RIGHTWARDS BLACK CIRCLED WHITE ARROW", 0x00, "Misc_Arrows"),
    c(0x2B8B, None, "DOWNWARDS BLACK CIRCLED WHITE ARROW", 0x00, "Misc_Arrows"),
    c(0x2B8C, None, "ANTICLOCKWISE TRIANGLE-HEADED RIGHT U-SHAPED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B8D, None, "ANTICLOCKWISE TRIANGLE-HEADED BOTTOM U-SHAPED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B8E, None, "ANTICLOCKWISE TRIANGLE-HEADED LEFT U-SHAPED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B8F, None, "ANTICLOCKWISE TRIANGLE-HEADED TOP U-SHAPED ARROW", 0x00, "Misc_Arrows"),
    c(0x2B90, None, "RETURN LEFT", 0x00, "Misc_Arrows"),
    c(0x2B91, None, "RETURN RIGHT", 0x00, "Misc_Arrows"),
    c(0x2B92, None, "NEWLINE LEFT", 0x00, "Misc_Arrows"),
    c(0x2B93, None, "NEWLINE RIGHT", 0x00, "Misc_Arrows"),
    c(0x2B94, None, "FOUR CORNER ARROWS CIRCLING ANTICLOCKWISE", 0x00, "Misc_Arrows"),
    c(0x2B95, None, "RIGHTWARDS BLACK ARROW", 0x00, "Misc_Arrows"),
    c(0x2B97, None, "SYMBOL FOR TYPE A ELECTRONICS", 0x00, "Misc_Arrows"),
    c(0x2B98, None, "THREE-D TOP-LIGHTED LEFTWARDS EQUILATERAL ARROWHEAD", 0x00, "Misc_Arrows"),
    c(0x2B99, None, "THREE-D RIGHT-LIGHTED UPWARDS EQUILATERAL ARROWHEAD", 0x00, "Misc_Arrows"),
    c(0x2B9A, None, "THREE-D TOP-LIGHTED RIGHTWARDS EQUILATERAL ARROWHEAD", 0x00, "Misc_Arrows"),
    c(0x2B9B, None, "THREE-D LEFT-LIGHTED DOWNWARDS EQUILATERAL ARROWHEAD", 0x00, "Misc_Arrows"),
    c(0x2B9C, None, "BLACK LEFTWARDS EQUILATERAL ARROWHEAD", 0x00, "Misc_Arrows"),
    c(0x2B9D, None, "BLACK UPWARDS EQUILATERAL ARROWHEAD", 0x00, "Misc_Arrows"),
    c(0x2B9E, None, "BLACK RIGHTWARDS EQUILATERAL ARROWHEAD", 0x00, "Misc_Arrows"),
    c(0x2B9F, None, "BLACK DOWNWARDS EQUILATERAL ARROWHEAD", 0x00, "Misc_Arrows"),
    c(0x2BA0, None, "DOWNWARDS TRIANGLE-HEADED ARROW WITH LONG TIP LEFTWARDS", 0x00, "Misc_Arrows"),
    c(0x2BA1, None, "DOWNWARDS TRIANGLE-HEADED ARROW WITH LONG TIP RIGHTWARDS", 0x00, "Misc_Arrows"),
    c(0x2BA2, None, "UPWARDS TRIANGLE-HEADED ARROW WITH LONG TIP LEFTWARDS", 0x00, "Misc_Arrows"),
    c(0x2BA3, None, "UPWARDS TRIANGLE-HEADED ARROW WITH LONG TIP RIGHTWARDS", 0x00, "Misc_Arrows"),
    c(0x2BA4, None, "LEFTWARDS TRIANGLE-HEADED ARROW WITH LONG TIP UPWARDS", 0x00, "Misc_Arrows"),
    c(0x2BA5, None, "RIGHTWARDS TRIANGLE-HEADED ARROW WITH LONG TIP UPWARDS", 0x00, "Misc_Arrows"),
    c(0x2BA6, None, "LEFTWARDS TRIANGLE-HEADED ARROW WITH LONG TIP DOWNWARDS", 0x00, "Misc_Arrows"),
    c(0x2BA7, None, "RIGHTWARDS TRIANGLE-HEADED ARROW WITH LONG TIP DOWNWARDS", 0x00, "Misc_Arrows"),
    c(0x2BA8, None, "BLACK CURVED DOWNWARDS AND LEFTWARDS ARROW", 0x00, "Misc_Arrows"),
    c(0x2BA9, None, "BLACK CURVED DOWNWARDS AND RIGHTWARDS ARROW", 0x00, "Misc_Arrows"),
    c(0x2BAA, None, "BLACK CURVED UPWARDS AND LEFTWARDS ARROW", 0x00, "Misc_Arrows"),
    c(0x2BAB, None, "BLACK CURVED UPWARDS AND RIGHTWARDS ARROW", 0x00, "Misc_Arrows"),
    c(0x2BAC, None, "BLACK CURVED LEFTWARDS AND UPWARDS ARROW", 0x00, "Misc_Arrows"),
    c(0x2BAD, None, "BLACK CURVED RIGHTWARDS AND UPWARDS ARROW", 0x00, "Misc_Arrows"),
    c(0x2BAE, None, "BLACK CURVED LEFTWARDS AND DOWNWARDS ARROW", 0x00, "Misc_Arrows"),
    c(0x2BAF, None, "BLACK CURVED RIGHTWARDS AND DOWNWARDS ARROW", 0x00, "Misc_Arrows"),
    c(0x2BB0, None, "RIBBON ARROW DOWN LEFT", 0x00, "Misc_Arrows"),
    c(0x2BB1, None, "RIBBON ARROW DOWN RIGHT", 0x00, "Misc_Arrows"),
    c(0x2BB2, None, "RIBBON ARROW UP LEFT", 0x00, "Misc_Arrows"),
    c(0x2BB3, None, "RIBBON ARROW UP RIGHT", 0x00, "Misc_Arrows"),
    c(0x2BB4, None, "RIBBON ARROW LEFT UP", 0x00, "Misc_Arrows"),
    c(0x2BB5, None, "RIBBON ARROW RIGHT UP", 0x00, "Misc_Arrows"),
    c(0x2BB6, None, "RIBBON ARROW LEFT DOWN", 0x00, "Misc_Arrows"),
    c(0x2BB7, None, "RIBBON ARROW RIGHT DOWN", 0x00, "Misc_Arrows"),
    c(0x2BB8, None, "UPWARDS WHITE ARROW FROM BAR WITH HORIZONTAL BAR", 0x00, "Misc_Arrows"),
    c(0x2BB9, None, "UP ARROWHEAD IN A RECTANGLE BOX", 0x00, "Misc_Arrows"),
    c(0x2BBA, None, "OVERLAPPING WHITE SQUARES", 0x00, "Misc_Arrows"),
    c(0x2BBB, None, "OVERLAPPING WHITE AND BLACK SQUARES", 0x00, "Misc_Arrows"),
    c(0x2BBC, None, "OVERLAPPING BLACK SQUARES", 0x00, "Misc_Arrows"),
    c(0x2BBD, None, "BALLOT BOX WITH LIGHT X", 0x00, "Misc_Arrows"),
    c(0x2BBE, None, "CIRCLED X", 0x00, "Misc_Arrows"),
    c(0x2BBF, None, "CIRCLED BOLD X", 0x00, "Misc_Arrows"),
    c(0x2BC0, None, "BLACK SQUARE CENTRED", 0x00, "Misc_Arrows"),
    c(0x2BC1, None, "BLACK DIAMOND CENTRED", 0x00, "Misc_Arrows"),
    c(0x2BC2, None, "TURNED BLACK PENTAGON", 0x00, "Misc_Arrows"),
    c(0x2BC3, None, "HORIZONTAL BLACK OCTAGON", 0x00, "Misc_Arrows"),
    c(0x2BC4, None, "BLACK OCTAGON", 0x00, "Misc_Arrows"),
    c(0x2BC5, None, "BLACK MEDIUM UP-POINTING TRIANGLE CENTRED", 0x00, "Misc_Arrows"),
    c(0x2BC6, None, "BLACK MEDIUM DOWN-POINTING TRIANGLE CENTRED", 0x00, "Misc_Arrows"),
    c(0x2BC7, None, "BLACK MEDIUM LEFT-POINTING TRIANGLE CENTRED", 0x00, "Misc_Arrows"),
    c(0x2BC8, None, "BLACK MEDIUM RIGHT-POINTING TRIANGLE CENTRED", 0x00, "Misc_Arrows"),
    c(0x2BC9, None, "NEPTUNE FORM TWO", 0x00, "Misc_Arrows"),
    c(0x2BCA, None, "TOP HALF BLACK CIRCLE", 0x00, "Misc_Arrows"),
    c(0x2BCB, None, "BOTTOM HALF BLACK CIRCLE", 0x00, "Misc_Arrows"),
    c(0x2BCC, None, "LIGHT FOUR POINTED BLACK CUSP", 0x00, "Misc_Arrows"),
    c(0x2BCD, None, "ROTATED LIGHT FOUR POINTED BLACK CUSP", 0x00, "Misc_Arrows"),
    c(0x2BCE, None, "WHITE FOUR POINTED CUSP", 0x00, "Misc_Arrows"),
    c(0x2BCF, None, "ROTATED WHITE FOUR POINTED CUSP", 0x00, "Misc_Arrows"),
    c(0x2BD0, None, "SQUARE POSITION INDICATOR", 0x00, "Misc_Arrows"),
    c(0x2BD1, None, "UNCERTAINTY SIGN", 0x00, "Misc_Arrows"),
    c(0x2BD2, None, "GROUP MARK", 0x00, "Misc_Arrows"),
    c(0x2BD3, None, "PLUTO FORM TWO", 0x00, "Misc_Arrows"),
    c(0x2BD4, None, "PLUTO FORM THREE", 0x00, "Misc_Arrows"),
    c(0x2BD5, None, "PLUTO FORM FOUR", 0x00, "Misc_Arrows"),
    c(0x2BD6, None, "PLUTO FORM FIVE", 0x00, "Misc_Arrows"),
    c(0x2BD7, None, "TRANSPLUTO", 0x00, "Misc_Arrows"),
    c(0x2BD8, None, "PROSERPINA", 0x00, "Misc_Arrows"),
    c(0x2BD9, None, "ASTRAEA", 0x00, "Misc_Arrows"),
    c(0x2BDA, None, "HYGIEA", 0x00, "Misc_Arrows"),
    c(0x2BDB, None, "PHOLUS", 0x00, "Misc_Arrows"),
    c(0x2BDC, None, "NESSUS", 0x00, "Misc_Arrows"),
    c(0x2BDD, None, "WHITE MOON SELENA", 0x00, "Misc_Arrows"),
    c(0x2BDE, None, "BLACK DIAMOND ON CROSS", 0x00, "Misc_Arrows"),
    c(0x2BDF, None, "TRUE LIGHT MOON ARTA", 0x00, "Misc_Arrows"),
    c(0x2BE0, None, "CUPIDO", 0x00, "Misc_Arrows"),
    c(0x2BE1, None, "HADES", 0x00, "Misc_Arrows"),
    c(0x2BE2, None, "ZEUS", 0x00, "Misc_Arrows"),
    c(0x2BE3, None, "KRONOS", 0x00, "Misc_Arrows"),
    c(0x2BE4, None, "APOLLON", 0x00, "Misc_Arrows"),
    c(0x2BE5, None, "ADMETOS", 0x00, "Misc_Arrows"),
    c(0x2BE6, None, "VULCANUS", 0x00, "Misc_Arrows"),
    c(0x2BE7, None, "POSEIDON", 0x00, "Misc_Arrows"),
    c(0x2BE8, None, "LEFT HALF BLACK STAR", 0x00, "Misc_Arrows"),
    c(0x2BE9, None, "RIGHT HALF BLACK STAR", 0x00, "Misc_Arrows"),
    c(0x2BEA, None, "STAR WITH LEFT HALF BLACK", 0x00, "Misc_Arrows"),
    c(0x2BEB, None, "STAR WITH RIGHT HALF BLACK", 0x00, "Misc_Arrows"),
    c(0x2BEC, None, "LEFTWARDS TWO-HEADED ARROW WITH TRIANGLE ARROWHEADS", 0x00, "Misc_Arrows"),
    c(0x2BED, None, "UPWARDS TWO-HEADED ARROW WITH TRIANGLE ARROWHEADS", 0x00, "Misc_Arrows"),
    c(0x2BEE, None, "RIGHTWARDS TWO-HEADED ARROW WITH TRIANGLE ARROWHEADS", 0x00, "Misc_Arrows"),
    c(0x2BEF, None, "DOWNWARDS TWO-HEADED ARROW WITH TRIANGLE ARROWHEADS", 0x00, "Misc_Arrows"),
    c(0x2BF0, None, "ERIS FORM ONE", 0x00, "Misc_Arrows"),
    c(0x2BF1, None, "ERIS FORM TWO", 0x00, "Misc_Arrows"),
    c(0x2BF2, None, "SEDNA", 0x00, "Misc_Arrows"),
    c(0x2BF3, None, "RUSSIAN ASTROLOGICAL SYMBOL VIGINTILE", 0x00, "Misc_Arrows"),
    c(0x2BF4, None, "RUSSIAN ASTROLOGICAL SYMBOL NOVILE", 0x00, "Misc_Arrows"),
    c(0x2BF5, None, "RUSSIAN ASTROLOGICAL SYMBOL QUINTILE", 0x00, "Misc_Arrows"),
    c(0x2BF6, None, "RUSSIAN ASTROLOGICAL SYMBOL BINOVILE", 0x00, "Misc_Arrows"),
    c(0x2BF7, None, "RUSSIAN ASTROLOGICAL SYMBOL SENTAGON", 0x00, "Misc_Arrows"),
    c(0x2BF8, None, "RUSSIAN ASTROLOGICAL SYMBOL TREDECILE", 0x00, "Misc_Arrows"),
    c(0x2BF9, None, "EQUALS SIGN WITH INFINITY BELOW", 0x00, "Misc_Arrows"),
    c(0x2BFA, None, "UNITED SYMBOL", 0x00, "Misc_Arrows"),
    c(0x2BFB, None, "SEPARATED SYMBOL", 0x00, "Misc_Arrows"),
    c(0x2BFC, None, "DOUBLED SYMBOL", 0x00, "Misc_Arrows"),
    c(0x2BFD, None, "PASSED SYMBOL", 0x00, "Misc_Arrows"),
    c(0x2BFE, None, "REVERSED RIGHT ANGLE", 0x00, "Misc_Arrows"),
    c(0x2BFF, None, "HELLSCHREIBER PAUSE SYMBOL", 0x00, "Misc_Arrows"),
    c(0x2C00, None, "GLAGOLITIC CAPITAL LETTER AZU", 0x31, "Glagolitic"),
    c(0x2C01, None, "GLAGOLITIC CAPITAL LETTER BUKY", 0x31, "Glagolitic"),
    c(0x2C02, None, "GLAGOLITIC CAPITAL LETTER VEDE", 0x31, "Glagolitic"),
    c(0x2C03, None, "GLAGOLITIC CAPITAL LETTER GLAGOLI", 0x31, "Glagolitic"),
    c(0x2C04, None, "GLAGOLITIC CAPITAL LETTER DOBRO", 0x31, "Glagolitic"),
    c(0x2C05, None, "GLAGOLITIC CAPITAL LETTER YESTU", 0x31, "Glagolitic"),
    c(0x2C06, None, "GLAGOLITIC CAPITAL LETTER ZHIVETE", 0x31, "Glagolitic"),
    c(0x2C07, None, "GLAGOLITIC CAPITAL LETTER DZELO", 0x31, "Glagolitic"),
    c(0x2C08, None, "GLAGOLITIC CAPITAL LETTER ZEMLJA", 0x31, "Glagolitic"),
    c(0x2C09, None, "GLAGOLITIC CAPITAL LETTER IZHE", 0x31, "Glagolitic"),
    c(0x2C0A, None, "GLAGOLITIC CAPITAL LETTER INITIAL IZHE", 0x31, "Glagolitic"),
    c(0x2C0B, None, "GLAGOLITIC CAPITAL LETTER I", 0x31, "Glagolitic"),
    c(0x2C0C, None, "GLAGOLITIC CAPITAL LETTER DJERVI", 0x31, "Glagolitic"),
    c(0x2C0D, None, "GLAGOLITIC CAPITAL LETTER KAKO", 0x31, "Glagolitic"),
    c(0x2C0E, None, "GLAGOLITIC CAPITAL LETTER LJUDIJE", 0x31, "Glagolitic"),
    c(0x2C0F, None, "GLAGOLITIC CAPITAL LETTER MYSLITE", 0x31, "Glagolitic"),
    c(0x2C10, None, "GLAGOLITIC CAPITAL LETTER NASHI", 0x31, "Glagolitic"),
    c(0x2C11, None, "GLAGOLITIC CAPITAL LETTER ONU", 0x31, "Glagolitic"),
    c(0x2C12, None, "GLAGOLITIC CAPITAL LETTER POKOJI", 0x31, "Glagolitic"),
    c(0x2C13, None, "GLAGOLITIC CAPITAL LETTER RITSI", 0x31, "Glagolitic"),
    c(0x2C14, None, "GLAGOLITIC CAPITAL LETTER SLOVO", 0x31, "Glagolitic"),
    c(0x2C15, None, "GLAGOLITIC CAPITAL LETTER TVRIDO", 0x31, "Glagolitic"),
    c(0x2C16, None, "GLAGOLITIC CAPITAL LETTER UKU", 0x31, "Glagolitic"),
    c(0x2C17, None, "GLAGOLITIC CAPITAL LETTER FRITU", 0x31, "Glagolitic"),
    c(0x2C18, None, "GLAGOLITIC CAPITAL LETTER HERU", 0x31, "Glagolitic"),
    c(0x2C19, None, "GLAGOLITIC CAPITAL LETTER OTU", 0x31, "Glagolitic"),
    c(0x2C1A, None, "GLAGOLITIC CAPITAL LETTER PE", 0x31, "Glagolitic"),
    c(0x2C1B, None, "GLAGOLITIC CAPITAL LETTER SHTA", 0x31, "Glagolitic"),
    c(0x2C1C, None, "GLAGOLITIC CAPITAL LETTER TSI", 0x31, "Glagolitic"),
    c(0x2C1D, None, "GLAGOLITIC CAPITAL LETTER CHRIVI", 0x31, "Glagolitic"),
    c(0x2C1E, None, "GLAGOLITIC CAPITAL LETTER SHA", 0x31, "Glagolitic"),
    c(0x2C1F, None, "GLAGOLITIC CAPITAL LETTER YERU", 0x31, "Glagolitic"),
    c(0x2C20, None, "GLAGOLITIC CAPITAL LETTER YERI", 0x31, "Glagolitic"),
    c(0x2C21, None, "GLAGOLITIC CAPITAL LETTER YATI", 0x31, "Glagolitic"),
    c(0x2C22, None, "GLAGOLITIC CAPITAL LETTER SPIDERY HA", 0x31, "Glagolitic"),
    c(0x2C23, None, "GLAGOLITIC CAPITAL LETTER YU", 0x31, "Glagolitic"),
    c(0x2C24, None, "GLAGOLITIC CAPITAL LETTER SMALL YUS", 0x31, "Glagolitic"),
    c(0x2C25, None, "GLAGOLITIC CAPITAL LETTER SMALL YUS WITH TAIL", 0x31, "Glagolitic"),
    c(0x2C26, None, "GLAGOLITIC CAPITAL LETTER YO", 0x31, "Glagolitic"),
    c(0x2C27, None, "GLAGOLITIC CAPITAL LETTER IOTATED SMALL YUS", 0x31, "Glagolitic"),
    c(0x2C28, None, "GLAGOLITIC CAPITAL LETTER BIG YUS", 0x31, "Glagolitic"),
    c(0x2C29, None, "GLAGOLITIC CAPITAL LETTER IOTATED BIG YUS", 0x31, "Glagolitic"),
    c(0x2C2A, None, "GLAGOLITIC CAPITAL LETTER FITA", 0x31, "Glagolitic"),
    c(0x2C2B, None, "GLAGOLITIC CAPITAL LETTER IZHITSA", 0x31, "Glagolitic"),
    c(0x2C2C, None, "GLAGOLITIC CAPITAL LETTER SHTAPIC", 0x31, "Glagolitic"),
    c(0x2C2D, None, "GLAGOLITIC CAPITAL LETTER TROKUTASTI A", 0x31, "Glagolitic"),
    c(0x2C2E, None, "GLAGOLITIC CAPITAL LETTER LATINATE MYSLITE", 0x31, "Glagolitic"),
    c(0x2C2F, None, "GLAGOLITIC CAPITAL LETTER CAUDATE CHRIVI", 0x31, "Glagolitic"),
    c(0x2C30, None, "GLAGOLITIC SMALL LETTER AZU", 0x31, "Glagolitic"),
    c(0x2C31, None, "GLAGOLITIC SMALL LETTER BUKY", 0x31, "Glagolitic"),
    c(0x2C32, None, "GLAGOLITIC SMALL LETTER VEDE", 0x31, "Glagolitic"),
    c(0x2C33, None, "GLAGOLITIC SMALL LETTER GLAGOLI", 0x31, "Glagolitic"),
    c(0x2C34, None, "GLAGOLITIC SMALL LETTER DOBRO", 0x31, "Glagolitic"),
    c(0x2C35, None, "GLAGOLITIC SMALL LETTER YESTU", 0x31, "Glagolitic"),
    c(0x2C36, None, "GLAGOLITIC SMALL LETTER ZHIVETE", 0x31, "Glagolitic"),
    c(0x2C37, None, "GLAGOLITIC SMALL LETTER DZELO", 0x31, "Glagolitic"),
    c(0x2C38, None, "GLAGOLITIC SMALL LETTER ZEMLJA", 0x31, "Glagolitic"),
    c(0x2C39, None, "GLAGOLITIC SMALL LETTER IZHE", 0x31, "Glagolitic"),
    c(0x2C3A, None, "GLAGOLITIC SMALL LETTER INITIAL IZHE", 0x31, "Glagolitic"),
    c(0x2C3B, None, "GLAGOLITIC SMALL LETTER I", 0x31, "Glagolitic"),
    c(0x2C3C, None, "GLAGOLITIC SMALL LETTER DJERVI", 0x31, "Glagolitic"),
    c(0x2C3D, None, "GLAGOLITIC SMALL LETTER KAKO", 0x31, "Glagolitic"),
    c(0x2C3E, None, "GLAGOLITIC SMALL LETTER LJUDIJE", 0x31, "Glagolitic"),
    c(0x2C3F, None, "GLAGOLITIC SMALL LETTER MYSLITE", 0x31, "Glagolitic"),
    c(0x2C40, None, "GLAGOLITIC SMALL LETTER NASHI", 0x31, "Glagolitic"),
    c(0x2C41, None, "GLAGOLITIC SMALL LETTER ONU", 0x31, "Glagolitic"),
    c(0x2C42, None, "GLAGOLITIC SMALL LETTER POKOJI", 0x31, "Glagolitic"),
    c(0x2C43, None, "GLAGOLITIC SMALL LETTER RITSI", 0x31, "Glagolitic"),
    c(0x2C44, None, "GLAGOLITIC SMALL LETTER SLOVO", 0x31, "Glagolitic"),
    c(0x2C45, None, "GLAGOLITIC SMALL LETTER TVRIDO", 0x31, "Glagolitic"),
    c(0x2C46, None, "GLAGOLITIC SMALL LETTER UKU", 0x31, "Glagolitic"),
    c(0x2C47, None, "GLAGOLITIC SMALL LETTER FRITU", 0x31, "Glagolitic"),
    c(0x2C48, None, "GLAGOLITIC SMALL LETTER HERU", 0x31, "Glagolitic"),
    c(0x2C49, None, "GLAGOLITIC SMALL LETTER OTU", 0x31, "Glagolitic"),
    c(0x2C4A, None, "GLAGOLITIC SMALL LETTER PE", 0x31, "Glagolitic"),
    c(0x2C4B, None, "GLAGOLITIC SMALL LETTER SHTA", 0x31, "Glagolitic"),
    c(0x2C4C, None, "GLAGOLITIC SMALL LETTER TSI", 0x31, "Glagolitic"),
    c(0x2C4D, None, "GLAGOLITIC SMALL LETTER CHRIVI", 0x31, "Glagolitic"),
    c(0x2C4E, None, "GLAGOLITIC SMALL LETTER SHA", 0x31, "Glagolitic"),
    c(0x2C4F, None, "GLAGOLITIC SMALL LETTER YERU", 0x31, "Glagolitic"),
    c(0x2C50, None, "GLAGOLITIC SMALL LETTER YERI", 0x31, "Glagolitic"),
    c(0x2C51, None, "GLAGOLITIC SMALL LETTER YATI", 0x31, "Glagolitic"),
    c(0x2C52, None, "GLAGOLITIC SMALL LETTER SPIDERY HA", 0x31, "Glagolitic"),
    c(0x2C53, None, "GLAGOLITIC SMALL LETTER YU", 0x31, "Glagolitic"),
    c(0x2C54, None, "GLAGOLITIC SMALL LETTER SMALL YUS", 0x31, "Glagolitic"),
    c(0x2C55, None, "GLAGOLITIC SMALL LETTER SMALL YUS WITH TAIL", 0x31, "Glagolitic"),
    c(0x2C56, None, "GLAGOLITIC SMALL LETTER YO", 0x31, "Glagolitic"),
    c(0x2C57, None, "GLAGOLITIC SMALL LETTER IOTATED SMALL YUS", 0x31, "Glagolitic"),
    c(0x2C58, None, "GLAGOLITIC SMALL LETTER BIG YUS", 0x31, "Glagolitic"),
    c(0x2C59, None, "GLAGOLITIC SMALL LETTER IOTATED BIG YUS", 0x31, "Glagolitic"),
    c(0x2C5A, None, "GLAGOLITIC SMALL LETTER FITA", 0x31, "Glagolitic"),
    c(0x2C5B, None, "GLAGOLITIC SMALL LETTER IZHITSA", 0x31, "Glagolitic"),
    c(0x2C5C, None, "GLAGOLITIC SMALL LETTER SHTAPIC", 0x31, "Glagolitic"),
    c(0x2C5D, None, "GLAGOLITIC SMALL LETTER TROKUTASTI A", 0x31, "Glagolitic"),
    c(0x2C5E, None, "GLAGOLITIC SMALL LETTER LATINATE MYSLITE", 0x31, "Glagolitic"),
    c(0x2C5F, None, "GLAGOLITIC SMALL LETTER CAUDATE CHRIVI", 0x31, "Glagolitic"),
    c(0x2C60, None, "LATIN CAPITAL LETTER L WITH DOUBLE BAR", 0x31, "Latin_Ext_C"),
    c(0x2C61, None, "LATIN SMALL LETTER L WITH DOUBLE BAR", 0x31, "Latin_Ext_C"),
    c(0x2C62, None, "LATIN CAPITAL LETTER L WITH MIDDLE TILDE", 0x31, "Latin_Ext_C"),
    c(0x2C63, None, "LATIN CAPITAL LETTER P WITH STROKE", 0x31, "Latin_Ext_C"),
    c(0x2C64, None, "LATIN CAPITAL LETTER R WITH TAIL", 0x31, "Latin_Ext_C"),
    c(0x2C65, None, "LATIN SMALL LETTER A WITH STROKE", 0x31, "Latin_Ext_C"),
    c(0x2C66, None, "LATIN SMALL LETTER T WITH DIAGONAL STROKE", 0x31, "Latin_Ext_C"),
    c(0x2C67, None, "LATIN CAPITAL LETTER H WITH DESCENDER", 0x31, "Latin_Ext_C"),
    c(0x2C68, None, "LATIN SMALL LETTER H WITH DESCENDER", 0x31, "Latin_Ext_C"),
    c(0x2C69, None, "LATIN CAPITAL LETTER K WITH DESCENDER", 0x31, "Latin_Ext_C"),
    c(0x2C6A, None, "LATIN SMALL LETTER K WITH DESCENDER", 0x31, "Latin_Ext_C"),
    c(0x2C6B, None, "LATIN CAPITAL LETTER Z WITH DESCENDER", 0x31, "Latin_Ext_C"),
    c(0x2C6C, None, "LATIN SMALL LETTER Z WITH DESCENDER", 0x31, "Latin_Ext_C"),
    c(0x2C6D, None, "LATIN CAPITAL LETTER ALPHA", 0x31, "Latin_Ext_C"),
    c(0x2C6E, None, "LATIN CAPITAL LETTER M WITH HOOK", 0x31, "Latin_Ext_C"),
    c(0x2C6F, None, "LATIN CAPITAL LETTER TURNED A", 0x31, "Latin_Ext_C"),
    c(0x2C70, None, "LATIN CAPITAL LETTER TURNED ALPHA", 0x31, "Latin_Ext_C"),
    c(0x2C71, None, "LATIN SMALL LETTER V WITH RIGHT HOOK", 0x31, "Latin_Ext_C"),
    c(0x2C72, None, "LATIN CAPITAL LETTER W WITH HOOK", 0x31, "Latin_Ext_C"),
    c(0x2C73, None, "LATIN SMALL LETTER W WITH HOOK", 0x31, "Latin_Ext_C"),
    c(0x2C74, None, "LATIN SMALL LETTER V WITH CURL", 0x31, "Latin_Ext_C"),
    c(0x2C75, None, "LATIN CAPITAL LETTER HALF H", 0x31, "Latin_Ext_C"),
    c(0x2C76, None, "LATIN SMALL LETTER HALF H", 0x31, "Latin_Ext_C"),
    c(0x2C77, None, "LATIN SMALL LETTER TAILLESS PHI", 0x31, "Latin_Ext_C"),
    c(0x2C78, None, "LATIN SMALL LETTER E WITH NOTCH", 0x31, "Latin_Ext_C"),
    c(0x2C79, None, "LATIN SMALL LETTER TURNED R WITH TAIL", 0x31, "Latin_Ext_C"),
    c(0x2C7A, None, "LATIN SMALL LETTER O WITH LOW RING INSIDE", 0x31, "Latin_Ext_C"),
    c(0x2C7B, None, "LATIN LETTER SMALL CAPITAL TURNED E", 0x31, "Latin_Ext_C"),
    c(0x2C7C, None, "LATIN SUBSCRIPT SMALL LETTER J", 0x31, "Latin_Ext_C"),
    c(0x2C7D, None, "MODIFIER LETTER CAPITAL V", 0x31, "Latin_Ext_C"),
    c(0x2C7E, None, "LATIN CAPITAL LETTER S WITH SWASH TAIL", 0x31, "Latin_Ext_C"),
    c(0x2C7F, None, "LATIN CAPITAL LETTER Z WITH SWASH TAIL", 0x31, "Latin_Ext_C"),
    c(0x2C80, None, "COPTIC CAPITAL LETTER ALFA", 0x31, "Coptic"),
    c(0x2C81, None, "COPTIC SMALL LETTER ALFA", 0x31, "Coptic"),
    c(0x2C82, None, "COPTIC CAPITAL LETTER VIDA", 0x31, "Coptic"),
    c(0x2C83, None, "COPTIC SMALL LETTER VIDA", 0x31, "Coptic"),
    c(0x2C84, None, "COPTIC CAPITAL LETTER GAMMA", 0x31, "Coptic"),
    c(0x2C85, None, "COPTIC SMALL LETTER GAMMA", 0x31, "Coptic"),
    c(0x2C86, None, "COPTIC CAPITAL LETTER DALDA", 0x31, "Coptic"),
    c(0x2C87, None, "COPTIC SMALL LETTER DALDA", 0x31, "Coptic"),
    c(0x2C88, None, "COPTIC CAPITAL LETTER EIE", 0x31, "Coptic"),
    c(0x2C89, None, "COPTIC SMALL LETTER EIE", 0x31, "Coptic"),
    c(0x2C8A, None, "COPTIC CAPITAL LETTER SOU", 0x31, "Coptic"),
    c(0x2C8B, None, "COPTIC SMALL LETTER SOU", 0x31, "Coptic"),
    c(0x2C8C, None, "COPTIC CAPITAL LETTER ZATA", 0x31, "Coptic"),
    c(0x2C8D, None, "COPTIC SMALL LETTER ZATA", 0x31, "Coptic"),
    c(0x2C8E, None, "COPTIC CAPITAL LETTER HATE", 0x31, "Coptic"),
    c(0x2C8F, None, "COPTIC SMALL LETTER HATE", 0x31, "Coptic"),
    c(0x2C90, None, "COPTIC CAPITAL LETTER THETHE", 0x31, "Coptic"),
    c(0x2C91, None, "COPTIC SMALL LETTER THETHE", 0x31, "Coptic"),
    c(0x2C92, None, "COPTIC CAPITAL LETTER IAUDA", 0x31, "Coptic"),
    c(0x2C93, None, "COPTIC SMALL LETTER IAUDA", 0x31, "Coptic"),
    c(0x2C94, None, "COPTIC CAPITAL LETTER KAPA", 0x31, "Coptic"),
    c(0x2C95, None, "COPTIC SMALL LETTER KAPA", 0x31, "Coptic"),
    c(0x2C96, None, "COPTIC CAPITAL LETTER LAULA", 0x31, "Coptic"),
    c(0x2C97, None, "COPTIC SMALL LETTER LAULA", 0x31, "Coptic"),
    c(0x2C98, None, "COPTIC CAPITAL LETTER MI", 0x31, "Coptic"),
    c(0x2C99, None, "COPTIC SMALL LETTER MI", 0x31, "Coptic"),
    c(0x2C9A, None, "COPTIC CAPITAL LETTER NI", 0x31, "Coptic"),
    c(0x2C9B, None, "COPTIC SMALL LETTER NI", 0x31, "Coptic"),
    c(0x2C9C, None, "COPTIC CAPITAL LETTER KSI", 0x31, "Coptic"),
    c(0x2C9D, None, "COPTIC SMALL LETTER KSI", 0x31, "Coptic"),
    c(0x2C9E, None, "COPTIC CAPITAL LETTER O", 0x31, "Coptic"),
    c(0x2C9F, None, "COPTIC SMALL LETTER O", 0x31, "Coptic"),
    c(0x2CA0, None, "COPTIC CAPITAL LETTER PI", 0x31, "Coptic"),
    c(0x2CA1, None, "COPTIC SMALL LETTER PI", 0x31, "Coptic"),
    c(0x2CA2, None, "COPTIC CAPITAL LETTER RO", 0x31, "Coptic"),
    c(0x2CA3, None, "COPTIC SMALL LETTER RO", 0x31, "Coptic"),
    c(0x2CA4, None, "COPTIC CAPITAL LETTER SIMA", 0x31, "Coptic"),
    c(0x2CA5, None, "COPTIC SMALL LETTER SIMA", 0x31, "Coptic"),
    c(0x2CA6, None, "COPTIC CAPITAL LETTER TAU", 0x31, "Coptic"),
    c(0x2CA7, None, "COPTIC SMALL LETTER TAU", 0x31, "Coptic"),
    c(0x2CA8, None, "COPTIC CAPITAL LETTER UA", 0x31, "Coptic"),
    c(0x2CA9, None, "COPTIC SMALL LETTER UA", 0x31, "Coptic"),
    c(0x2CAA, None, "COPTIC CAPITAL LETTER FI", 0x31, "Coptic"),
    c(0x2CAB, None, "COPTIC SMALL LETTER FI", 0x31, "Coptic"),
    c(0x2CAC, None, "COPTIC CAPITAL LETTER KHI", 0x31, "Coptic"),
    c(0x2CAD, None, "COPTIC SMALL LETTER KHI", 0x31, "Coptic"),
    c(0x2CAE, None, "COPTIC CAPITAL LETTER PSI", 0x31, "Coptic"),
    c(0x2CAF, None, "COPTIC SMALL LETTER PSI", 0x31, "Coptic"),
    c(0x2CB0, None, "COPTIC CAPITAL LETTER OOU", 0x31, "Coptic"),
    c(0x2CB1, None, "COPTIC SMALL LETTER OOU", 0x31, "Coptic"),
    c(0x2CB2, None, "COPTIC CAPITAL LETTER DIALECT-P ALEF", 0x31, "Coptic"),
    c(0x2CB3, None, "COPTIC SMALL LETTER DIALECT-P ALEF", 0x31, "Coptic"),
    c(0x2CB4, None, "COPTIC CAPITAL LETTER OLD COPTIC AIN", 0x31, "Coptic"),
    c(0x2CB5, None, "COPTIC SMALL LETTER OLD COPTIC AIN", 0x31, "Coptic"),
    c(0x2CB6, None, "COPTIC CAPITAL LETTER CRYPTOGRAMMIC EIE", 0x31, "Coptic"),
    c(0x2CB7, None, "COPTIC SMALL LETTER CRYPTOGRAMMIC EIE", 0x31, "Coptic"),
    c(0x2CB8, None, "COPTIC CAPITAL LETTER DIALECT-P KAPA", 0x31, "Coptic"),
    c(0x2CB9, None, "COPTIC SMALL LETTER DIALECT-P KAPA", 0x31, "Coptic"),
    c(0x2CBA, None, "COPTIC CAPITAL LETTER DIALECT-P NI", 0x31, "Coptic"),
    c(0x2CBB, None, "COPTIC SMALL LETTER DIALECT-P NI", 0x31, "Coptic"),
    c(0x2CBC, None, "COPTIC CAPITAL LETTER CRYPTOGRAMMIC NI", 0x31, "Coptic"),
    c(0x2CBD, None, "COPTIC SMALL LETTER CRYPTOGRAMMIC NI", 0x31, "Coptic"),
    c(0x2CBE, None, "COPTIC CAPITAL LETTER OLD COPTIC OOU", 0x31, "Coptic"),
    c(0x2CBF, None, "COPTIC SMALL LETTER OLD COPTIC OOU", 0x31, "Coptic"),
    c(0x2CC0, None, "COPTIC CAPITAL LETTER SAMPI", 0x31, "Coptic"),
    c(0x2CC1, None, "COPTIC SMALL LETTER SAMPI", 0x31, "Coptic"),
    c(0x2CC2, None, "COPTIC CAPITAL LETTER CROSSED SHEI", 0x31, "Coptic"),
    c(0x2CC3, None, "COPTIC SMALL LETTER CROSSED SHEI", 0x31, "Coptic"),
    c(0x2CC4, None, "COPTIC CAPITAL LETTER OLD COPTIC SHEI", 0x31, "Coptic"),
    c(0x2CC5, None, "COPTIC SMALL LETTER OLD COPTIC SHEI", 0x31, "Coptic"),
    c(0x2CC6, None, "COPTIC CAPITAL LETTER OLD COPTIC ESH", 0x31, "Coptic"),
    c(0x2CC7, None, "COPTIC SMALL LETTER OLD COPTIC ESH", 0x31, "Coptic"),
    c(0x2CC8, None, "COPTIC CAPITAL LETTER AKHMIMIC KHEI", 0x31, "Coptic"),
    c(0x2CC9, None, "COPTIC SMALL LETTER AKHMIMIC KHEI", 0x31, "Coptic"),
    c(0x2CCA, None, "COPTIC CAPITAL LETTER DIALECT-P HORI", 0x31, "Coptic"),
    c(0x2CCB, None, "COPTIC SMALL LETTER DIALECT-P HORI", 0x31, "Coptic"),
    c(0x2CCC, None, "COPTIC CAPITAL LETTER OLD COPTIC HORI", 0x31, "Coptic"),
    c(0x2CCD, None, "COPTIC SMALL LETTER OLD COPTIC HORI", 0x31, "Coptic"),
    c(0x2CCE, None, "COPTIC CAPITAL LETTER OLD COPTIC HA", 0x31, "Coptic"),
    c(0x2CCF, None, "COPTIC SMALL LETTER OLD COPTIC HA", 0x31, "Coptic"),
    c(0x2CD0, None, "COPTIC CAPITAL LETTER L-SHAPED HA", 0x31, "Coptic"),
    c(0x2CD1, None, "COPTIC SMALL LETTER L-SHAPED HA", 0x31, "Coptic"),
    c(0x2CD2, None, "COPTIC CAPITAL LETTER OLD COPTIC HEI", 0x31, "Coptic"),
    c(0x2CD3, None, "COPTIC SMALL LETTER OLD COPTIC HEI", 0x31, "Coptic"),
    c(0x2CD4, None, "COPTIC CAPITAL LETTER OLD COPTIC HAT", 0x31, "Coptic"),
    c(0x2CD5, None, "COPTIC SMALL LETTER OLD COPTIC HAT", 0x31, "Coptic"),
    c(0x2CD6, None, "COPTIC CAPITAL LETTER OLD COPTIC GANGIA", 0x31, "Coptic"),
    c(0x2CD7, None, "COPTIC SMALL LETTER OLD COPTIC GANGIA", 0x31, "Coptic"),
    c(0x2CD8, None, "COPTIC CAPITAL LETTER OLD COPTIC DJA", 0x31, "Coptic"),
    c(0x2CD9, None, "COPTIC SMALL LETTER OLD COPTIC DJA", 0x31, "Coptic"),
    c(0x2CDA, None, "COPTIC CAPITAL LETTER OLD COPTIC SHIMA", 0x31, "Coptic"),
    c(0x2CDB, None, "COPTIC SMALL LETTER OLD COPTIC SHIMA", 0x31, "Coptic"),
    c(0x2CDC, None, "COPTIC CAPITAL LETTER OLD NUBIAN SHIMA", 0x31, "Coptic"),
    c(0x2CDD, None, "COPTIC SMALL LETTER OLD NUBIAN SHIMA", 0x31, "Coptic"),
    c(0x2CDE, None, "COPTIC CAPITAL LETTER OLD NUBIAN NGI", 0x31, "Coptic"),
    c(0x2CDF, None, "COPTIC SMALL LETTER OLD NUBIAN NGI", 0x31, "Coptic"),
    c(0x2CE0, None, "COPTIC CAPITAL LETTER OLD NUBIAN NYI", 0x31, "Coptic"),
    c(0x2CE1, None, "COPTIC SMALL LETTER OLD NUBIAN NYI", 0x31, "Coptic"),
    c(0x2CE2, None, "COPTIC CAPITAL LETTER OLD NUBIAN WAU", 0x31, "Coptic"),
    c(0x2CE3, None, "COPTIC SMALL LETTER OLD NUBIAN WAU", 0x31, "Coptic"),
    c(0x2CE4, None, "COPTIC SYMBOL KAI", 0x31, "Coptic"),
    c(0x2CE5, None, "COPTIC SYMBOL MI RO", 0x00, "Coptic"),
    c(0x2CE6, None, "COPTIC SYMBOL PI RO", 0x00, "Coptic"),
    c(0x2CE7, None, "COPTIC SYMBOL STAUROS", 0x00, "Coptic"),
    c(0x2CE8, None, "COPTIC SYMBOL TAU RO", 0x00, "Coptic"),
    c(0x2CE9, None, "COPTIC SYMBOL KHI RO", 0x00, "Coptic"),
    c(0x2CEA, None, "COPTIC SYMBOL SHIMA SIMA", 0x00, "Coptic"),
    c(0x2CEB, None, "COPTIC CAPITAL LETTER CRYPTOGRAMMIC SHEI", 0x31, "Coptic"),
    c(0x2CEC, None, "COPTIC SMALL LETTER CRYPTOGRAMMIC SHEI", 0x31, "Coptic"),
    c(0x2CED, None, "COPTIC CAPITAL LETTER CRYPTOGRAMMIC GANGIA", 0x31, "Coptic"),
    c(0x2CEE, None, "COPTIC SMALL LETTER CRYPTOGRAMMIC GANGIA", 0x31, "Coptic"),
    c(0x2CEF, None, "COPTIC COMBINING NI ABOVE", 0x20, "Coptic"),
    c(0x2CF0, None, "COPTIC COMBINING SPIRITUS ASPER", 0x20, "Coptic"),
    c(0x2CF1, None, "COPTIC COMBINING SPIRITUS LENIS", 0x20, "Coptic"),
    c(0x2CF2, None, "COPTIC CAPITAL LETTER BOHAIRIC KHEI", 0x31, "Coptic"),
    c(0x2CF3, None, "COPTIC SMALL LETTER BOHAIRIC KHEI", 0x31, "Coptic"),
    c(0x2CF9, None, "COPTIC OLD NUBIAN FULL STOP", 0x00, "Coptic"),
    c(0x2CFA, None, "COPTIC OLD NUBIAN DIRECT QUESTION MARK", 0x00, "Coptic"),
    c(0x2CFB, None, "COPTIC OLD NUBIAN INDIRECT QUESTION MARK", 0x00, "Coptic"),
    c(0x2CFC, None, "COPTIC OLD NUBIAN VERSE DIVIDER", 0x00, "Coptic"),
    c(0x2CFD, None, "COPTIC FRACTION ONE HALF", 0x00, "Coptic"),
    c(0x2CFE, None, "COPTIC FULL STOP", 0x00, "Coptic"),
    c(0x2CFF, None, "COPTIC MORPHOLOGICAL DIVIDER", 0x00, "Coptic"),
    c(0x2D00, None, "GEORGIAN SMALL LETTER AN", 0x31, "Georgian_Sup"),
    c(0x2D01, None, "GEORGIAN SMALL LETTER BAN", 0x31, "Georgian_Sup"),
    c(0x2D02, None, "GEORGIAN SMALL LETTER GAN", 0x31, "Georgian_Sup"),
    c(0x2D03, None, "GEORGIAN SMALL LETTER DON", 0x31, "Georgian_Sup"),
    c(0x2D04, None, "GEORGIAN SMALL LETTER EN", 0x31, "Georgian_Sup"),
    c(0x2D05, None, "GEORGIAN SMALL LETTER VIN", 0x31, "Georgian_Sup"),
    c(0x2D06, None, "GEORGIAN SMALL LETTER ZEN", 0x31, "Georgian_Sup"),
    c(0x2D07, None, "GEORGIAN SMALL LETTER TAN", 0x31, "Georgian_Sup"),
    c(0x2D08, None, "GEORGIAN SMALL LETTER IN", 0x31, "Georgian_Sup"),
    c(0x2D09, None, "GEORGIAN SMALL LETTER KAN", 0x31, "Georgian_Sup"),
    c(0x2D0A, None, "GEORGIAN SMALL LETTER LAS", 0x31, "Georgian_Sup"),
    c(0x2D0B, None, "GEORGIAN SMALL LETTER MAN", 0x31, "Georgian_Sup"),
    c(0x2D0C, None, "GEORGIAN SMALL LETTER NAR", 0x31, "Georgian_Sup"),
    c(0x2D0D, None, "GEORGIAN SMALL LETTER ON", 0x31, "Georgian_Sup"),
    c(0x2D0E, None, "GEORGIAN SMALL LETTER PAR", 0x31, "Georgian_Sup"),
    c(0x2D0F, None, "GEORGIAN SMALL LETTER ZHAR", 0x31, "Georgian_Sup"),
    c(0x2D10, None, "GEORGIAN SMALL LETTER RAE", 0x31, "Georgian_Sup"),
    c(0x2D11, None, "GEORGIAN SMALL LETTER SAN", 0x31, "Georgian_Sup"),
    c(0x2D12, None, "GEORGIAN SMALL LETTER TAR", 0x31, "Georgian_Sup"),
    c(0x2D13, None, "GEORGIAN SMALL LETTER UN", 0x31, "Georgian_Sup"),
    c(0x2D14, None, "GEORGIAN SMALL LETTER PHAR", 0x31, "Georgian_Sup"),
    c(0x2D15, None, "GEORGIAN SMALL LETTER KHAR", 0x31, "Georgian_Sup"),
    c(0x2D16, None, "GEORGIAN SMALL LETTER GHAN", 0x31, "Georgian_Sup"),
    c(0x2D17, None, "GEORGIAN SMALL LETTER QAR", 0x31, "Georgian_Sup"),
    c(0x2D18, None, "GEORGIAN SMALL LETTER SHIN", 0x31, "Georgian_Sup"),
    c(0x2D19, None, "GEORGIAN SMALL LETTER CHIN", 0x31, "Georgian_Sup"),
    c(0x2D1A, None, "GEORGIAN SMALL LETTER CAN", 0x31, "Georgian_Sup"),
    c(0x2D1B, None, "GEORGIAN SMALL LETTER JIL", 0x31, "Georgian_Sup"),
    c(0x2D1C, None, "GEORGIAN SMALL LETTER CIL", 0x31, "Georgian_Sup"),
    c(0x2D1D, None, "GEORGIAN SMALL LETTER CHAR", 0x31, "Georgian_Sup"),
    c(0x2D1E, None, "GEORGIAN SMALL LETTER XAN", 0x31, "Georgian_Sup"),
    c(0x2D1F, None, "GEORGIAN SMALL LETTER JHAN", 0x31, "Georgian_Sup"),
    c(0x2D20, None, "GEORGIAN SMALL LETTER HAE", 0x31, "Georgian_Sup"),
    c(0x2D21, None, "GEORGIAN SMALL LETTER HE", 0x31, "Georgian_Sup"),
    c(0x2D22, None, "GEORGIAN SMALL LETTER HIE", 0x31, "Georgian_Sup"),
    c(0x2D23, None, "GEORGIAN SMALL LETTER WE", 0x31, "Georgian_Sup"),
    c(0x2D24, None, "GEORGIAN SMALL LETTER HAR", 0x31, "Georgian_Sup"),
    c(0x2D25, None, "GEORGIAN SMALL LETTER HOE", 0x31, "Georgian_Sup"),
    c(0x2D27, None, "GEORGIAN SMALL LETTER YN", 0x31, "Georgian_Sup"),
    c(0x2D2D, None, "GEORGIAN SMALL LETTER AEN", 0x31, "Georgian_Sup"),
    c(0x2D30, None, "TIFINAGH LETTER YA", 0x31, "Tifinagh"),
    c(0x2D31, None, "TIFINAGH LETTER YAB", 0x31, "Tifinagh"),
    c(0x2D32, None, "TIFINAGH LETTER YABH", 0x31, "Tifinagh"),
    c(0x2D33, None, "TIFINAGH LETTER YAG", 0x31, "Tifinagh"),
    c(0x2D34, None, "TIFINAGH LETTER YAGHH", 0x31, "Tifinagh"),
    c(0x2D35, None, "TIFINAGH LETTER BERBER ACADEMY YAJ", 0x31, "Tifinagh"),
    c(0x2D36, None, "TIFINAGH LETTER YAJ", 0x31, "Tifinagh"),
    c(0x2D37, None, "TIFINAGH LETTER YAD", 0x31, "Tifinagh"),
    c(0x2D38, None, "TIFINAGH LETTER YADH", 0x31, "Tifinagh"),
    c(0x2D39, None, "TIFINAGH LETTER YADD", 0x31, "Tifinagh"),
    c(0x2D3A, None, "TIFINAGH LETTER YADDH", 0x31, "Tifinagh"),
    c(0x2D3B, None, "TIFINAGH LETTER YEY", 0x31, "Tifinagh"),
    c(0x2D3C, None, "TIFINAGH LETTER YAF", 0x31, "Tifinagh"),
    c(0x2D3D, None, "TIFINAGH LETTER YAK", 0x31, "Tifinagh"),
    c(0x2D3E, None, "TIFINAGH LETTER TUAREG YAK", 0x31, "Tifinagh"),
    c(0x2D3F, None, "TIFINAGH LETTER YAKHH", 0x31, "Tifinagh"),
    c(0x2D40, None, "TIFINAGH LETTER YAH", 0x31, "Tifinagh"),
    c(0x2D41, None, "TIFINAGH LETTER BERBER ACADEMY YAH", 0x31, "Tifinagh"),
    c(0x2D42, None, "TIFINAGH LETTER TUAREG YAH", 0x31, "Tifinagh"),
    c(0x2D43, None, "TIFINAGH LETTER YAHH", 0x31, "Tifinagh"),
    c(0x2D44, None, "TIFINAGH LETTER YAA", 0x31, "Tifinagh"),
    c(0x2D45, None, "TIFINAGH LETTER YAKH", 0x31, "Tifinagh"),
    c(0x2D46, None, "TIFINAGH LETTER TUAREG YAKH", 0x31, "Tifinagh"),
    c(0x2D47, None, "TIFINAGH LETTER YAQ", 0x31, "Tifinagh"),
    c(0x2D48, None, "TIFINAGH LETTER TUAREG YAQ", 0x31, "Tifinagh"),
    c(0x2D49, None, "TIFINAGH LETTER YI", 0x31, "Tifinagh"),
    c(0x2D4A, None, "TIFINAGH LETTER YAZH", 0x31, "Tifinagh"),
    c(0x2D4B, None, "TIFINAGH LETTER AHAGGAR YAZH", 0x31, "Tifinagh"),
    c(0x2D4C, None, "TIFINAGH LETTER TUAREG YAZH", 0x31, "Tifinagh"),
    c(0x2D4D, None, "TIFINAGH LETTER YAL", 0x31, "Tifinagh"),
    c(0x2D4E, None, "TIFINAGH LETTER YAM", 0x31, "Tifinagh"),
    c(0x2D4F, None, "TIFINAGH LETTER YAN", 0x31, "Tifinagh"),
    c(0x2D50, None, "TIFINAGH LETTER TUAREG YAGN", 0x31, "Tifinagh"),
    c(0x2D51, None, "TIFINAGH LETTER TUAREG YANG", 0x31, "Tifinagh"),
    c(0x2D52, None, "TIFINAGH LETTER YAP", 0x31, "Tifinagh"),
    c(0x2D53, None, "TIFINAGH LETTER YU", 0x31, "Tifinagh"),
    c(0x2D54, None, "TIFINAGH LETTER YAR", 0x31, "Tifinagh"),
    c(0x2D55, None, "TIFINAGH LETTER YARR", 0x31, "Tifinagh"),
    c(0x2D56, None, "TIFINAGH LETTER YAGH", 0x31, "Tifinagh"),
    c(0x2D57, None, "TIFINAGH LETTER TUAREG YAGH", 0x31, "Tifinagh"),
    c(0x2D58, None, "TIFINAGH LETTER AYER YAGH", 0x31, "Tifinagh"),
    c(0x2D59, None, "TIFINAGH LETTER YAS", 0x31, "Tifinagh"),
    c(0x2D5A, None, "TIFINAGH LETTER YASS", 0x31, "Tifinagh"),
    c(0x2D5B, None, "TIFINAGH LETTER YASH", 0x31, "Tifinagh"),
    c(0x2D5C, None, "TIFINAGH LETTER YAT", 0x31, "Tifinagh"),
    c(0x2D5D, None, "TIFINAGH LETTER YATH", 0x31, "Tifinagh"),
    c(0x2D5E, None, "TIFINAGH LETTER YACH", 0x31, "Tifinagh"),
    c(0x2D5F, None, "TIFINAGH LETTER YATT", 0x31, "Tifinagh"),
    c(0x2D60, None, "TIFINAGH LETTER YAV", 0x31, "Tifinagh"),
    c(0x2D61, None, "TIFINAGH LETTER YAW", 0x31, "Tifinagh"),
    c(0x2D62, None, "TIFINAGH LETTER YAY", 0x31, "Tifinagh"),
    c(0x2D63, None, "TIFINAGH LETTER YAZ", 0x31, "Tifinagh"),
    c(0x2D64, None, "TIFINAGH LETTER TAWELLEMET YAZ", 0x31, "Tifinagh"),
    c(0x2D65, None, "TIFINAGH LETTER YAZZ", 0x31, "Tifinagh"),
    c(0x2D66, None, "TIFINAGH LETTER YE", 0x31, "Tifinagh"),
    c(0x2D67, None, "TIFINAGH LETTER YO", 0x31, "Tifinagh"),
    c(0x2D6F, None, "TIFINAGH MODIFIER LETTER LABIALIZATION MARK", 0x31, "Tifinagh"),
    c(0x2D70, None, "TIFINAGH SEPARATOR MARK", 0x00, "Tifinagh"),
    c(0x2D7F, None, "TIFINAGH CONSONANT JOINER", 0x20, "Tifinagh"),
    c(0x2D80, None, "ETHIOPIC SYLLABLE LOA", 0x31, "Ethiopic_Ext"),
    c(0x2D81, None, "ETHIOPIC SYLLABLE MOA", 0x31, "Ethiopic_Ext"),
    c(0x2D82, None, "ETHIOPIC SYLLABLE ROA", 0x31, "Ethiopic_Ext"),
    c(0x2D83, None, "ETHIOPIC SYLLABLE SOA", 0x31, "Ethiopic_Ext"),
    c(0x2D84, None, "ETHIOPIC SYLLABLE SHOA", 0x31, "Ethiopic_Ext"),
    c(0x2D85, None, "ETHIOPIC SYLLABLE BOA", 0x31, "Ethiopic_Ext"),
    c(0x2D86, None, "ETHIOPIC SYLLABLE TOA", 0x31, "Ethiopic_Ext"),
    c(0x2D87, None, "ETHIOPIC SYLLABLE COA", 0x31, "Ethiopic_Ext"),
    c(0x2D88, None, "ETHIOPIC SYLLABLE NOA", 0x31, "Ethiopic_Ext"),
    c(0x2D89, None, "ETHIOPIC SYLLABLE NYOA", 0x31, "Ethiopic_Ext"),
    c(0x2D8A, None, "ETHIOPIC SYLLABLE GLOTTAL OA", 0x31, "Ethiopic_Ext"),
    c(0x2D8B, None, "ETHIOPIC SYLLABLE ZOA", 0x31, "Ethiopic_Ext"),
    c(0x2D8C, None, "ETHIOPIC SYLLABLE DOA", 0x31, "Ethiopic_Ext"),
    c(0x2D8D, None, "ETHIOPIC SYLLABLE DDOA", 0x31, "Ethiopic_Ext"),
    c(0x2D8E, None, "ETHIOPIC SYLLABLE JOA", 0x31, "Ethiopic_Ext"),
    c(0x2D8F, None, "ETHIOPIC SYLLABLE THOA", 0x31, "Ethiopic_Ext"),
    c(0x2D90, None, "ETHIOPIC SYLLABLE CHOA", 0x31, "Ethiopic_Ext"),
    c(0x2D91, None, "ETHIOPIC SYLLABLE PHOA", 0x31, "Ethiopic_Ext"),
    c(0x2D92, None, "ETHIOPIC SYLLABLE POA", 0x31, "Ethiopic_Ext"),
    c(0x2D93, None, "ETHIOPIC SYLLABLE GGWA", 0x31, "Ethiopic_Ext"),
    c(0x2D94, None, "ETHIOPIC SYLLABLE GGWI", 0x31, "Ethiopic_Ext"),
    c(0x2D95, None, "ETHIOPIC SYLLABLE GGWEE", 0x31, "Ethiopic_Ext"),
    c(0x2D96, None, "ETHIOPIC SYLLABLE GGWE", 0x31, "Ethiopic_Ext"),
    c(0x2DA0, None, "ETHIOPIC SYLLABLE SSA", 0x31, "Ethiopic_Ext"),
    c(0x2DA1, None, "ETHIOPIC SYLLABLE SSU", 0x31, "Ethiopic_Ext"),
    c(0x2DA2, None, "ETHIOPIC SYLLABLE SSI", 0x31, "Ethiopic_Ext"),
    c(0x2DA3, None, "ETHIOPIC SYLLABLE SSAA", 0x31, "Ethiopic_Ext"),
    c(0x2DA4, None, "ETHIOPIC SYLLABLE SSEE", 0x31, "Ethiopic_Ext"),
    c(0x2DA5, None, "ETHIOPIC SYLLABLE SSE", 0x31, "Ethiopic_Ext"),
    c(0x2DA6, None, "ETHIOPIC SYLLABLE SSO", 0x31, "Ethiopic_Ext"),
    c(0x2DA8, None, "ETHIOPIC SYLLABLE CCA", 0x31, "Ethiopic_Ext"),
    c(0x2DA9, None, "ETHIOPIC SYLLABLE CCU", 0x31, "Ethiopic_Ext"),
    c(0x2DAA, None, "ETHIOPIC SYLLABLE CCI", 0x31, "Ethiopic_Ext"),
    c(0x2DAB, None, "ETHIOPIC SYLLABLE CCAA", 0x31, "Ethiopic_Ext"),
    c(0x2DAC, None, "ETHIOPIC SYLLABLE CCEE", 0x31, "Ethiopic_Ext"),
    c(0x2DAD, None, "ETHIOPIC SYLLABLE CCE", 0x31, "Ethiopic_Ext"),
    c(0x2DAE, None, "ETHIOPIC SYLLABLE CCO", 0x31, "Ethiopic_Ext"),
    c(0x2DB0, None, "ETHIOPIC SYLLABLE ZZA", 0x31, "Ethiopic_Ext"),
    c(0x2DB1, None, "ETHIOPIC SYLLABLE ZZU", 0x31, "Ethiopic_Ext"),
    c(0x2DB2, None, "ETHIOPIC SYLLABLE ZZI", 0x31, "Ethiopic_Ext"),
    c(0x2DB3, None, "ETHIOPIC SYLLABLE ZZAA", 0x31, "Ethiopic_Ext"),
    c(0x2DB4, None, "ETHIOPIC SYLLABLE ZZEE", 0x31, "Ethiopic_Ext"),
    c(0x2DB5, None, "ETHIOPIC SYLLABLE ZZE", 0x31, "Ethiopic_Ext"),
    c(0x2DB6, None, "ETHIOPIC SYLLABLE ZZO", 0x31, "Ethiopic_Ext"),
    c(0x2DB8, None, "ETHIOPIC SYLLABLE CCHA", 0x31, "Ethiopic_Ext"),
    c(0x2DB9, None, "ETHIOPIC SYLLABLE CCHU", 0x31, "Ethiopic_Ext"),
    c(0x2DBA, None, "ETHIOPIC SYLLABLE CCHI", 0x31, "Ethiopic_Ext"),
    c(0x2DBB, None, "ETHIOPIC SYLLABLE CCHAA", 0x31, "Ethiopic_Ext"),
    c(0x2DBC, None, "ETHIOPIC SYLLABLE CCHEE", 0x31, "Ethiopic_Ext"),
    c(0x2DBD, None, "ETHIOPIC SYLLABLE CCHE", 0x31, "Ethiopic_Ext"),
    c(0x2DBE, None, "ETHIOPIC SYLLABLE CCHO", 0x31, "Ethiopic_Ext"),
    c(0x2DC0, None, "ETHIOPIC SYLLABLE QYA", 0x31, "Ethiopic_Ext"),
    c(0x2DC1, None, "ETHIOPIC SYLLABLE QYU", 0x31, "Ethiopic_Ext"),
    c(0x2DC2, None, "ETHIOPIC SYLLABLE QYI", 0x31, "Ethiopic_Ext"),
    c(0x2DC3, None, "ETHIOPIC SYLLABLE QYAA", 0x31, "Ethiopic_Ext"),
    c(0x2DC4, None, "ETHIOPIC SYLLABLE QYEE", 0x31, "Ethiopic_Ext"),
    c(0x2DC5, None, "ETHIOPIC SYLLABLE QYE", 0x31, "Ethiopic_Ext"),
    c(0x2DC6, None, "ETHIOPIC SYLLABLE QYO", 0x31, "Ethiopic_Ext"),
    c(0x2DC8, None, "ETHIOPIC SYLLABLE KYA", 0x31, "Ethiopic_Ext"),
    c(0x2DC9, None, "ETHIOPIC SYLLABLE KYU", 0x31, "Ethiopic_Ext"),
    c(0x2DCA, None, "ETHIOPIC SYLLABLE KYI", 0x31, "Ethiopic_Ext"),
    c(0x2DCB, None, "ETHIOPIC SYLLABLE KYAA", 0x31, "Ethiopic_Ext"),
    c(0x2DCC, None, "ETHIOPIC SYLLABLE KYEE", 0x31, "Ethiopic_Ext"),
    c(0x2DCD, None, "ETHIOPIC SYLLABLE KYE", 0x31, "Ethiopic_Ext"),
    c(0x2DCE, None, "ETHIOPIC SYLLABLE KYO", 0x31, "Ethiopic_Ext"),
    c(0x2DD0, None, "ETHIOPIC SYLLABLE XYA", 0x31, "Ethiopic_Ext"),
    c(0x2DD1, None, "ETHIOPIC SYLLABLE XYU", 0x31, "Ethiopic_Ext"),
    c(0x2DD2, None, "ETHIOPIC SYLLABLE XYI", 0x31, "Ethiopic_Ext"),
    c(0x2DD3, None, "ETHIOPIC SYLLABLE XYAA", 0x31, "Ethiopic_Ext"),
    c(0x2DD4, None, "ETHIOPIC SYLLABLE XYEE", 0x31, "Ethiopic_Ext"),
    c(0x2DD5, None, "ETHIOPIC SYLLABLE XYE", 0x31, "Ethiopic_Ext"),
    c(0x2DD6, None, "ETHIOPIC SYLLABLE XYO", 0x31, "Ethiopic_Ext"),
    c(0x2DD8, None, "ETHIOPIC SYLLABLE GYA", 0x31, "Ethiopic_Ext"),
    c(0x2DD9, None, "ETHIOPIC SYLLABLE GYU", 0x31, "Ethiopic_Ext"),
    c(0x2DDA, None, "ETHIOPIC SYLLABLE GYI", 0x31, "Ethiopic_Ext"),
    c(0x2DDB, None, "ETHIOPIC SYLLABLE GYAA", 0x31, "Ethiopic_Ext"),
    c(0x2DDC, None, "ETHIOPIC SYLLABLE GYEE", 0x31, "Ethiopic_Ext"),
    c(0x2DDD, None, "ETHIOPIC SYLLABLE GYE", 0x31, "Ethiopic_Ext"),
    c(0x2DDE, None, "ETHIOPIC SYLLABLE GYO", 0x31, "Ethiopic_Ext"),
    c(0x2DE0, None, "COMBINING CYRILLIC LETTER BE", 0x21, "Cyrillic_Ext_A"),
    c(0x2DE1, None, "COMBINING CYRILLIC LETTER VE", 0x21, "Cyrillic_Ext_A"),
    c(0x2DE2, None, "COMBINING CYRILLIC LETTER GHE", 0x21, "Cyrillic_Ext_A"),
    c(0x2DE3, None, "COMBINING CYRILLIC LETTER DE", 0x21, "Cyrillic_Ext_A"),
    c(0x2DE4, None, "COMBINING CYRILLIC LETTER ZHE", 0x21, "Cyrillic_Ext_A"),
    c(0x2DE5, None, "COMBINING CYRILLIC LETTER ZE", 0x21, "Cyrillic_Ext_A"),
    c(0x2DE6, None, "COMBINING CYRILLIC LETTER KA", 0x21, "Cyrillic_Ext_A"),
    c(0x2DE7, None, "COMBINING CYRILLIC LETTER EL", 0x21, "Cyrillic_Ext_A"),
    c(0x2DE8, None, "COMBINING CYRILLIC LETTER EM", 0x21, "Cyrillic_Ext_A"),
    c(0x2DE9, None, "COMBINING CYRILLIC LETTER EN", 0x21, "Cyrillic_Ext_A"),
    c(0x2DEA, None, "COMBINING CYRILLIC LETTER O", 0x21, "Cyrillic_Ext_A"),
    c(0x2DEB, None, "COMBINING CYRILLIC LETTER PE", 0x21, "Cyrillic_Ext_A"),
    c(0x2DEC, None, "COMBINING CYRILLIC LETTER ER", 0x21, "Cyrillic_Ext_A"),
    c(0x2DED, None, "COMBINING CYRILLIC LETTER ES", 0x21, "Cyrillic_Ext_A"),
    c(0x2DEE, None, "COMBINING CYRILLIC LETTER TE", 0x21, "Cyrillic_Ext_A"),
    c(0x2DEF, None, "COMBINING CYRILLIC LETTER HA", 0x21, "Cyrillic_Ext_A"),
    c(0x2DF0, None, "COMBINING CYRILLIC LETTER TSE", 0x21, "Cyrillic_Ext_A"),
    c(0x2DF1, None, "COMBINING CYRILLIC LETTER CHE", 0x21, "Cyrillic_Ext_A"),
    c(0x2DF2, None, "COMBINING CYRILLIC LETTER SHA", 0x21, "Cyrillic_Ext_A"),
    c(0x2DF3, None, "COMBINING CYRILLIC LETTER SHCHA", 0x21, "Cyrillic_Ext_A"),
    c(0x2DF4, None, "COMBINING CYRILLIC LETTER FITA", 0x21, "Cyrillic_Ext_A"),
    c(0x2DF5, None, "COMBINING CYRILLIC LETTER ES-TE", 0x21, "Cyrillic_Ext_A"),
    c(0x2DF6, None, "COMBINING CYRILLIC LETTER A", 0x21, "Cyrillic_Ext_A"),
    c(0x2DF7, None, "COMBINING CYRILLIC LETTER IE", 0x21, "Cyrillic_Ext_A"),
    c(0x2DF8, None, "COMBINING CYRILLIC LETTER DJERV", 0x21, "Cyrillic_Ext_A"),
    c(0x2DF9, None, "COMBINING CYRILLIC LETTER MONOGRAPH UK", 0x21, "Cyrillic_Ext_A"),
    c(0x2DFA, None, "COMBINING CYRILLIC LETTER YAT", 0x21, "Cyrillic_Ext_A"),
    c(0x2DFB, None, "COMBINING CYRILLIC LETTER YU", 0x21, "Cyrillic_Ext_A"),
    c(0x2DFC, None, "COMBINING CYRILLIC LETTER IOTIFIED A", 0x21, "Cyrillic_Ext_A"),
    c(0x2DFD, None, "COMBINING CYRILLIC LETTER LITTLE YUS", 0x21, "Cyrillic_Ext_A"),
    c(0x2DFE, None, "COMBINING CYRILLIC LETTER BIG YUS", 0x21, "Cyrillic_Ext_A"),
    c(0x2DFF, None, "COMBINING CYRILLIC LETTER IOTIFIED BIG YUS", 0x21, "Cyrillic_Ext_A"),
    c(0x2E00, None, "RIGHT ANGLE SUBSTITUTION MARKER", 0x00, "Sup_Punctuation"),
    c(0x2E01, None, "RIGHT ANGLE DOTTED SUBSTITUTION MARKER", 0x00, "Sup_Punctuation"),
    c(0x2E02, None, "LEFT SUBSTITUTION BRACKET", 0x00, "Sup_Punctuation"),
    c(0x2E03, None, "RIGHT SUBSTITUTION BRACKET", 0x00, "Sup_Punctuation"),
    c(0x2E04, None, "LEFT DOTTED SUBSTITUTION BRACKET", 0x00, "Sup_Punctuation"),
    c(0x2E05, None, "RIGHT DOTTED SUBSTITUTION BRACKET", 0x00, "Sup_Punctuation"),
    c(0x2E06, None, "RAISED INTERPOLATION MARKER", 0x00, "Sup_Punctuation"),
    c(0x2E07, None, "RAISED DOTTED INTERPOLATION MARKER", 0x00, "Sup_Punctuation"),
    c(0x2E08, None, "DOTTED TRANSPOSITION MARKER", 0x00, "Sup_Punctuation"),
    c(0x2E09, None, "LEFT TRANSPOSITION BRACKET", 0x00, "Sup_Punctuation"),
    c(0x2E0A, None, "RIGHT TRANSPOSITION BRACKET", 0x00, "Sup_Punctuation"),
    c(0x2E0B, None, "RAISED SQUARE", 0x00, "Sup_Punctuation"),
    c(0x2E0C, None, "LEFT RAISED OMISSION BRACKET", 0x00, "Sup_Punctuation"),
    c(0x2E0D, None, "RIGHT RAISED OMISSION BRACKET", 0x00, "Sup_Punctuation"),
    c(0x2E0E, None, "EDITORIAL CORONIS", 0x00, "Sup_Punctuation"),
    c(0x2E0F, None, "PARAGRAPHOS", 0x00, "Sup_Punctuation"),
    c(0x2E10, None, "FORKED PARAGRAPHOS", 0x00, "Sup_Punctuation"),
    c(0x2E11, None, "REVERSED FORKED PARAGRAPHOS", 0x00, "Sup_Punctuation"),
    c(0x2E12, None, "HYPODIASTOLE", 0x00, "Sup_Punctuation"),
    c(0x2E13, None, "DOTTED OBELOS", 0x00, "Sup_Punctuation"),
    c(0x2E14, None, "DOWNWARDS ANCORA", 0x00, "Sup_Punctuation"),
    c(0x2E15, None, "UPWARDS ANCORA", 0x00, "Sup_Punctuation"),
    c(0x2E16, None, "DOTTED RIGHT-POINTING ANGLE", 0x00, "Sup_Punctuation"),
    c(0x2E17, None, "DOUBLE OBLIQUE HYPHEN", 0x00, "Sup_Punctuation"),
    c(0x2E18, None, "INVERTED INTERROBANG", 0x00, "Sup_Punctuation"),
    c(0x2E19, None, "PALM BRANCH", 0x00, "Sup_Punctuation"),
    c(0x2E1A, None, "HYPHEN WITH DIAERESIS", 0x00, "Sup_Punctuation"),
    c(0x2E1B, None, "TILDE WITH RING ABOVE", 0x00, "Sup_Punctuation"),
    c(0x2E1C, None, "LEFT LOW PARAPHRASE BRACKET", 0x00, "Sup_Punctuation"),
    c(0x2E1D, None, "RIGHT LOW PARAPHRASE BRACKET", 0x00, "Sup_Punctuation"),
    c(0x2E1E, None, "TILDE WITH DOT ABOVE", 0x00, "Sup_Punctuation"),
    c(0x2E1F, None, "TILDE WITH DOT BELOW", 0x00, "Sup_Punctuation"),
    c(0x2E20, None, "LEFT VERTICAL BAR WITH QUILL", 0x00, "Sup_Punctuation"),
    c(0x2E21, None, "RIGHT VERTICAL BAR WITH QUILL", 0x00, "Sup_Punctuation"),
    c(0x2E22, None, "TOP LEFT HALF BRACKET", 0x00, "Sup_Punctuation"),
    c(0x2E23, None, "TOP RIGHT HALF BRACKET", 0x00, "Sup_Punctuation"),
    c(0x2E24, None, "BOTTOM LEFT HALF BRACKET", 0x00, "Sup_Punctuation"),
    c(0x2E25, None, "BOTTOM RIGHT HALF BRACKET", 0x00, "Sup_Punctuation"),
    c(0x2E26, None, "LEFT SIDEWAYS U BRACKET", 0x00, "Sup_Punctuation"),
    c(0x2E27, None, "RIGHT SIDEWAYS U BRACKET", 0x00, "Sup_Punctuation"),
    c(0x2E28, None, "LEFT DOUBLE PARENTHESIS", 0x00, "Sup_Punctuation"),
    c(0x2E29, None, "RIGHT DOUBLE PARENTHESIS", 0x00, "Sup_Punctuation"),
    c(0x2E2A, None, "TWO DOTS OVER ONE DOT PUNCTUATION", 0x00, "Sup_Punctuation"),
    c(0x2E2B, None, "ONE DOT OVER TWO DOTS PUNCTUATION", 0x00, "Sup_Punctuation"),
    c(0x2E2C, None, "SQUARED FOUR DOT PUNCTUATION", 0x00, "Sup_Punctuation"),
    c(0x2E2D, None, "FIVE DOT MARK", 0x00, "Sup_Punctuation"),
    c(0x2E2E, None, "REVERSED QUESTION MARK", 0x00, "Sup_Punctuation"),
    c(0x2E2F, None, "VERTICAL TILDE", 0x01, "Sup_Punctuation"),
    c(0x2E30, None, "RING POINT", 0x00, "Sup_Punctuation"),
    c(0x2E31, None, "WORD SEPARATOR MIDDLE DOT", 0x00, "Sup_Punctuation"),
    c(0x2E32, None, "TURNED COMMA", 0x00, "Sup_Punctuation"),
    c(0x2E33, None, "RAISED DOT", 0x00, "Sup_Punctuation"),
    c(0x2E34, None, "RAISED COMMA", 0x00, "Sup_Punctuation"),
    c(0x2E35, None, "TURNED SEMICOLON", 0x00, "Sup_Punctuation"),
    c(0x2E36, None, "DAGGER WITH LEFT GUARD", 0x00, "Sup_Punctuation"),
    c(0x2E37, None, "DAGGER WITH RIGHT GUARD", 0x00, "Sup_Punctuation"),
    c(0x2E38, None, "TURNED DAGGER", 0x00, "Sup_Punctuation"),
    c(0x2E39, None, "TOP HALF SECTION SIGN", 0x00, "Sup_Punctuation"),
    c(0x2E3A, None, "TWO-EM DASH", 0x00, "Sup_Punctuation"),
    c(0x2E3B, None, "THREE-EM DASH", 0x00, "Sup_Punctuation"),
    c(0x2E3C, None, "STENOGRAPHIC FULL STOP", 0x00, "Sup_Punctuation"),
    c(0x2E3D, None, "VERTICAL SIX DOTS", 0x00, "Sup_Punctuation"),
    c(0x2E3E, None, "WIGGLY VERTICAL LINE", 0x00, "Sup_Punctuation"),
    c(0x2E3F, None, "CAPITULUM", 0x00, "Sup_Punctuation"),
    c(0x2E40, None, "DOUBLE HYPHEN", 0x00, "Sup_Punctuation"),
    c(0x2E41, None, "REVERSED COMMA", 0x00, "Sup_Punctuation"),
    c(0x2E42, None, "DOUBLE LOW-REVERSED-9 QUOTATION MARK", 0x00, "Sup_Punctuation"),
    c(0x2E43, None, "DASH WITH LEFT UPTURN", 0x00, "Sup_Punctuation"),
    c(0x2E44, None, "DOUBLE SUSPENSION MARK", 0x00, "Sup_Punctuation"),
    c(0x2E45, None, "INVERTED LOW KAVYKA", 0x00, "Sup_Punctuation"),
    c(0x2E46, None, "INVERTED LOW KAVYKA WITH KAVYKA ABOVE", 0x00, "Sup_Punctuation"),
    c(0x2E47, None, "LOW KAVYKA", 0x00, "Sup_Punctuation"),
    c(0x2E48, None, "LOW KAVYKA WITH DOT", 0x00, "Sup_Punctuation"),
    c(0x2E49, None, "DOUBLE STACKED COMMA", 0x00, "Sup_Punctuation"),
    c(0x2E4A, None, "DOTTED SOLIDUS", 0x00, "Sup_Punctuation"),
    c(0x2E4B, None, "TRIPLE DAGGER", 0x00, "Sup_Punctuation"),
    c(0x2E4C, None, "MEDIEVAL COMMA", 0x00, "Sup_Punctuation"),
    c(0x2E4D, None, "PARAGRAPHUS MARK", 0x00, "Sup_Punctuation"),
    c(0x2E4E, None, "PUNCTUS ELEVATUS MARK", 0x00, "Sup_Punctuation"),
    c(0x2E4F, None, "CORNISH VERSE DIVIDER", 0x00, "Sup_Punctuation"),
    c(0x2E50, None, "CROSS PATTY WITH RIGHT CROSSBAR", 0x00, "Sup_Punctuation"),
    c(0x2E51, None, "CROSS PATTY WITH LEFT CROSSBAR", 0x00, "Sup_Punctuation"),
    c(0x2E52, None, "TIRONIAN SIGN CAPITAL ET", 0x00, "Sup_Punctuation"),
    c(0x2E53, None, "MEDIEVAL EXCLAMATION MARK", 0x00, "Sup_Punctuation"),
    c(0x2E54, None, "MEDIEVAL QUESTION MARK", 0x00, "Sup_Punctuation"),
    c(0x2E55, None, "LEFT SQUARE BRACKET WITH STROKE", 0x00, "Sup_Punctuation"),
    c(0x2E56, None, "RIGHT SQUARE BRACKET WITH STROKE", 0x00, "Sup_Punctuation"),
    c(0x2E57, None, "LEFT SQUARE BRACKET WITH DOUBLE STROKE", 0x00, "Sup_Punctuation"),
    c(0x2E58, None, "RIGHT SQUARE BRACKET WITH DOUBLE STROKE", 0x00, "Sup_Punctuation"),
    c(0x2E59, None, "TOP HALF LEFT PARENTHESIS", 0x00, "Sup_Punctuation"),
    c(0x2E5A, None, "TOP HALF RIGHT PARENTHESIS", 0x00, "Sup_Punctuation"),
    c(0x2E5B, None, "BOTTOM HALF LEFT PARENTHESIS", 0x00, "Sup_Punctuation"),
    c(0x2E5C, None, "BOTTOM HALF RIGHT PARENTHESIS", 0x00, "Sup_Punctuation"),
    c(0x2E5D, None, "OBLIQUE HYPHEN", 0x00, "Sup_Punctuation"),
    c(0x2E80, None, "CJK RADICAL REPEAT", 0x00, "CJK_Radicals_Sup"),
    c(0x2E81, None, "CJK RADICAL CLIFF", 0x00, "CJK_Radicals_Sup"),
    c(0x2E82, None, "CJK RADICAL SECOND ONE", 0x00, "CJK_Radicals_Sup"),
    c(0x2E83, None, "CJK RADICAL SECOND TWO", 0x00, "CJK_Radicals_Sup"),
    c(0x2E84, None, "CJK RADICAL SECOND THREE", 0x00, "CJK_Radicals_Sup"),
    c(0x2E85, None, "CJK RADICAL PERSON", 0x00, "CJK_Radicals_Sup"),
    c(0x2E86, None, "CJK RADICAL BOX", 0x00, "CJK_Radicals_Sup"),
    c(0x2E87, None, "CJK RADICAL TABLE", 0x00, "CJK_Radicals_Sup"),
    c(0x2E88, None, "CJK RADICAL KNIFE ONE", 0x00, "CJK_Radicals_Sup"),
    c(0x2E89, None, "CJK RADICAL KNIFE TWO", 0x00, "CJK_Radicals_Sup"),
    c(0x2E8A, None, "CJK RADICAL DIVINATION", 0x00, "CJK_Radicals_Sup"),
    c(0x2E8B, None, "CJK RADICAL SEAL", 0x00, "CJK_Radicals_Sup"),
    c(0x2E8C, None, "CJK RADICAL SMALL ONE", 0x00, "CJK_Radicals_Sup"),
    c(0x2E8D, None, "CJK RADICAL SMALL TWO", 0x00, "CJK_Radicals_Sup"),
    c(0x2E8E, None, "CJK RADICAL LAME ONE", 0x00, "CJK_Radicals_Sup"),
    c(0x2E8F, None, "CJK RADICAL LAME TWO", 0x00, "CJK_Radicals_Sup"),
    c(0x2E90, None, "CJK RADICAL LAME THREE", 0x00, "CJK_Radicals_Sup"),
    c(0x2E91, None, "CJK RADICAL LAME FOUR", 0x00, "CJK_Radicals_Sup"),
    c(0x2E92, None, "CJK RADICAL SNAKE", 0x00, "CJK_Radicals_Sup"),
    c(0x2E93, None, "CJK RADICAL THREAD", 0x00, "CJK_Radicals_Sup"),
    c(0x2E94, None, "CJK RADICAL SNOUT ONE", 0x00, "CJK_Radicals_Sup"),
    c(0x2E95, None, "CJK RADICAL SNOUT TWO", 0x00, "CJK_Radicals_Sup"),
    c(0x2E96, None, "CJK RADICAL HEART ONE", 0x00, "CJK_Radicals_Sup"),
    c(0x2E97, None, "CJK RADICAL HEART TWO", 0x00, "CJK_Radicals_Sup"),
    c(0x2E98, None, "CJK RADICAL HAND", 0x00, "CJK_Radicals_Sup"),
    c(0x2E99, None, "CJK RADICAL RAP", 0x00, "CJK_Radicals_Sup"),
    c(0x2E9B, None, "CJK RADICAL CHOKE", 0x00, "CJK_Radicals_Sup"),
    c(0x2E9C, None, "CJK RADICAL SUN", 0x00, "CJK_Radicals_Sup"),
    c(0x2E9D, None, "CJK RADICAL MOON", 0x00, "CJK_Radicals_Sup"),
    c(0x2E9E, None, "CJK RADICAL DEATH", 0x00, "CJK_Radicals_Sup"),
    c(0x2E9F, None, "CJK RADICAL MOTHER", 0x00, "CJK_Radicals_Sup"),
    c(0x2EA0, None, "CJK RADICAL CIVILIAN", 0x00, "CJK_Radicals_Sup"),
    c(0x2EA1, None, "CJK RADICAL WATER ONE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EA2, None, "CJK RADICAL WATER TWO", 0x00, "CJK_Radicals_Sup"),
    c(0x2EA3, None, "CJK RADICAL FIRE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EA4, None, "CJK RADICAL PAW ONE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EA5, None, "CJK RADICAL PAW TWO", 0x00, "CJK_Radicals_Sup"),
    c(0x2EA6, None, "CJK RADICAL SIMPLIFIED HALF TREE TRUNK", 0x00, "CJK_Radicals_Sup"),
    c(0x2EA7, None, "CJK RADICAL COW", 0x00, "CJK_Radicals_Sup"),
    c(0x2EA8, None, "CJK RADICAL DOG", 0x00, "CJK_Radicals_Sup"),
    c(0x2EA9, None, "CJK RADICAL JADE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EAA, None, "CJK RADICAL BOLT OF CLOTH", 0x00, "CJK_Radicals_Sup"),
    c(0x2EAB, None, "CJK RADICAL EYE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EAC, None, "CJK RADICAL SPIRIT ONE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EAD, None, "CJK RADICAL SPIRIT TWO", 0x00, "CJK_Radicals_Sup"),
    c(0x2EAE, None, "CJK RADICAL BAMBOO", 0x00, "CJK_Radicals_Sup"),
    c(0x2EAF, None, "CJK RADICAL SILK", 0x00, "CJK_Radicals_Sup"),
    c(0x2EB0, None, "CJK RADICAL C-SIMPLIFIED SILK", 0x00, "CJK_Radicals_Sup"),
    c(0x2EB1, None, "CJK RADICAL NET ONE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EB2, None, "CJK RADICAL NET TWO", 0x00, "CJK_Radicals_Sup"),
    c(0x2EB3, None, "CJK RADICAL NET THREE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EB4, None, "CJK RADICAL NET FOUR", 0x00, "CJK_Radicals_Sup"),
    c(0x2EB5, None, "CJK RADICAL MESH", 0x00, "CJK_Radicals_Sup"),
    c(0x2EB6, None, "CJK RADICAL SHEEP", 0x00, "CJK_Radicals_Sup"),
    c(0x2EB7, None, "CJK RADICAL RAM", 0x00, "CJK_Radicals_Sup"),
    c(0x2EB8, None, "CJK RADICAL EWE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EB9, None, "CJK RADICAL OLD", 0x00, "CJK_Radicals_Sup"),
    c(0x2EBA, None, "CJK RADICAL BRUSH ONE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EBB, None, "CJK RADICAL BRUSH TWO", 0x00, "CJK_Radicals_Sup"),
    c(0x2EBC, None, "CJK RADICAL MEAT", 0x00, "CJK_Radicals_Sup"),
    c(0x2EBD, None, "CJK RADICAL MORTAR", 0x00, "CJK_Radicals_Sup"),
    c(0x2EBE, None, "CJK RADICAL GRASS ONE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EBF, None, "CJK RADICAL GRASS TWO", 0x00, "CJK_Radicals_Sup"),
    c(0x2EC0, None, "CJK RADICAL GRASS THREE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EC1, None, "CJK RADICAL TIGER", 0x00, "CJK_Radicals_Sup"),
    c(0x2EC2, None, "CJK RADICAL CLOTHES", 0x00, "CJK_Radicals_Sup"),
    c(0x2EC3, None, "CJK RADICAL WEST ONE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EC4, None, "CJK RADICAL WEST TWO", 0x00, "CJK_Radicals_Sup"),
    c(0x2EC5, None, "CJK RADICAL C-SIMPLIFIED SEE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EC6, None, "CJK RADICAL SIMPLIFIED HORN", 0x00, "CJK_Radicals_Sup"),
    c(0x2EC7, None, "CJK RADICAL HORN", 0x00, "CJK_Radicals_Sup"),
    c(0x2EC8, None, "CJK RADICAL C-SIMPLIFIED SPEECH", 0x00, "CJK_Radicals_Sup"),
    c(0x2EC9, None, "CJK RADICAL C-SIMPLIFIED SHELL", 0x00, "CJK_Radicals_Sup"),
    c(0x2ECA, None, "CJK RADICAL FOOT", 0x00, "CJK_Radicals_Sup"),
    c(0x2ECB, None, "CJK RADICAL C-SIMPLIFIED CART", 0x00, "CJK_Radicals_Sup"),
    c(0x2ECC, None, "CJK RADICAL SIMPLIFIED WALK", 0x00, "CJK_Radicals_Sup"),
    c(0x2ECD, None, "CJK RADICAL WALK ONE", 0x00, "CJK_Radicals_Sup"),
    c(0x2ECE, None, "CJK RADICAL WALK TWO", 0x00, "CJK_Radicals_Sup"),
    c(0x2ECF, None, "CJK RADICAL CITY", 0x00, "CJK_Radicals_Sup"),
    c(0x2ED0, None, "CJK RADICAL C-SIMPLIFIED GOLD", 0x00, "CJK_Radicals_Sup"),
    c(0x2ED1, None, "CJK RADICAL LONG ONE", 0x00, "CJK_Radicals_Sup"),
    c(0x2ED2, None, "CJK RADICAL LONG TWO", 0x00, "CJK_Radicals_Sup"),
    c(0x2ED3, None, "CJK RADICAL C-SIMPLIFIED LONG", 0x00, "CJK_Radicals_Sup"),
    c(0x2ED4, None, "CJK RADICAL C-SIMPLIFIED GATE", 0x00, "CJK_Radicals_Sup"),
    c(0x2ED5, None, "CJK RADICAL MOUND ONE", 0x00, "CJK_Radicals_Sup"),
    c(0x2ED6, None, "CJK RADICAL MOUND TWO", 0x00, "CJK_Radicals_Sup"),
    c(0x2ED7, None, "CJK RADICAL RAIN", 0x00, "CJK_Radicals_Sup"),
    c(0x2ED8, None, "CJK RADICAL BLUE", 0x00, "CJK_Radicals_Sup"),
    c(0x2ED9, None, "CJK RADICAL C-SIMPLIFIED TANNED LEATHER", 0x00, "CJK_Radicals_Sup"),
    c(0x2EDA, None, "CJK RADICAL C-SIMPLIFIED LEAF", 0x00, "CJK_Radicals_Sup"),
    c(0x2EDB, None, "CJK RADICAL C-SIMPLIFIED WIND", 0x00, "CJK_Radicals_Sup"),
    c(0x2EDC, None, "CJK RADICAL C-SIMPLIFIED FLY", 0x00, "CJK_Radicals_Sup"),
    c(0x2EDD, None, "CJK RADICAL EAT ONE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EDE, None, "CJK RADICAL EAT TWO", 0x00, "CJK_Radicals_Sup"),
    c(0x2EDF, None, "CJK RADICAL EAT THREE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EE0, None, "CJK RADICAL C-SIMPLIFIED EAT", 0x00, "CJK_Radicals_Sup"),
    c(0x2EE1, None, "CJK RADICAL HEAD", 0x00, "CJK_Radicals_Sup"),
    c(0x2EE2, None, "CJK RADICAL C-SIMPLIFIED HORSE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EE3, None, "CJK RADICAL BONE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EE4, None, "CJK RADICAL GHOST", 0x00, "CJK_Radicals_Sup"),
    c(0x2EE5, None, "CJK RADICAL C-SIMPLIFIED FISH", 0x00, "CJK_Radicals_Sup"),
    c(0x2EE6, None, "CJK RADICAL C-SIMPLIFIED BIRD", 0x00, "CJK_Radicals_Sup"),
    c(0x2EE7, None, "CJK RADICAL C-SIMPLIFIED SALT", 0x00, "CJK_Radicals_Sup"),
    c(0x2EE8, None, "CJK RADICAL SIMPLIFIED WHEAT", 0x00, "CJK_Radicals_Sup"),
    c(0x2EE9, None, "CJK RADICAL SIMPLIFIED YELLOW", 0x00, "CJK_Radicals_Sup"),
    c(0x2EEA, None, "CJK RADICAL C-SIMPLIFIED FROG", 0x00, "CJK_Radicals_Sup"),
    c(0x2EEB, None, "CJK RADICAL J-SIMPLIFIED EVEN", 0x00, "CJK_Radicals_Sup"),
    c(0x2EEC, None, "CJK RADICAL C-SIMPLIFIED EVEN", 0x00, "CJK_Radicals_Sup"),
    c(0x2EED, None, "CJK RADICAL J-SIMPLIFIED TOOTH", 0x00, "CJK_Radicals_Sup"),
    c(0x2EEE, None, "CJK RADICAL C-SIMPLIFIED TOOTH", 0x00, "CJK_Radicals_Sup"),
    c(0x2EEF, None, "CJK RADICAL J-SIMPLIFIED DRAGON", 0x00, "CJK_Radicals_Sup"),
    c(0x2EF0, None, "CJK RADICAL C-SIMPLIFIED DRAGON", 0x00, "CJK_Radicals_Sup"),
    c(0x2EF1, None, "CJK RADICAL TURTLE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EF2, None, "CJK RADICAL J-SIMPLIFIED TURTLE", 0x00, "CJK_Radicals_Sup"),
    c(0x2EF3, None, "CJK RADICAL C-SIMPLIFIED TURTLE", 0x00, "CJK_Radicals_Sup"),
    c(0x2F00, None, "KANGXI RADICAL ONE", 0x00, "Kangxi"),
    c(0x2F01, None, "KANGXI RADICAL LINE", 0x00, "Kangxi"),
    c(0x2F02, None, "KANGXI RADICAL DOT", 0x00, "Kangxi"),
    c(0x2F03, None, "KANGXI RADICAL SLASH", 0x00, "Kangxi"),
    c(0x2F04, None, "KANGXI RADICAL SECOND", 0x00, "Kangxi"),
    c(0x2F05, None, "KANGXI RADICAL HOOK", 0x00, "Kangxi"),
    c(0x2F06, None, "KANGXI RADICAL TWO", 0x00, "Kangxi"),
    c(0x2F07, None, "KANGXI RADICAL LID", 0x00, "Kangxi"),
    c(0x2F08, None, "KANGXI RADICAL MAN", 0x00, "Kangxi"),
    c(0x2F09, None, "KANGXI RADICAL LEGS", 0x00, "Kangxi"),
    c(0x2F0A, None, "KANGXI RADICAL ENTER", 0x00, "Kangxi"),
    c(0x2F0B, None, "KANGXI RADICAL EIGHT", 0x00, "Kangxi"),
    c(0x2F0C, None, "KANGXI RADICAL DOWN BOX", 0x00, "Kangxi"),
    c(0x2F0D, None, "KANGXI RADICAL COVER", 0x00, "Kangxi"),
    c(0x2F0E, None, "KANGXI RADICAL ICE", 0x00, "Kangxi"),
    c(0x2F0F, None, "KANGXI RADICAL TABLE", 0x00, "Kangxi"),
    c(0x2F10, None, "KANGXI RADICAL OPEN BOX", 0x00, "Kangxi"),
    c(0x2F11, None, "KANGXI RADICAL KNIFE", 0x00, "Kangxi"),
    c(0x2F12, None, "KANGXI RADICAL POWER", 0x00, "Kangxi"),
    c(0x2F13, None, "KANGXI RADICAL WRAP", 0x00, "Kangxi"),
    c(0x2F14, None, "KANGXI RADICAL SPOON", 0x00, "Kangxi"),
    c(0x2F15, None, "KANGXI RADICAL RIGHT OPEN BOX", 0x00, "Kangxi"),
    c(0x2F16, None, "KANGXI RADICAL HIDING ENCLOSURE", 0x00, "Kangxi"),
    c(0x2F17, None, "KANGXI RADICAL TEN", 0x00, "Kangxi"),
    c(0x2F18, None, "KANGXI RADICAL DIVINATION", 0x00, "Kangxi"),
    c(0x2F19, None, "KANGXI RADICAL SEAL", 0x00, "Kangxi"),
    c(0x2F1A, None, "KANGXI RADICAL CLIFF", 0x00, "Kangxi"),
    c(0x2F1B, None, "KANGXI RADICAL PRIVATE", 0x00, "Kangxi"),
    c(0x2F1C, None, "KANGXI RADICAL AGAIN", 0x00, "Kangxi"),
    c(0x2F1D, None, "KANGXI RADICAL MOUTH", 0x00, "Kangxi"),
    c(0x2F1E, None, "KANGXI RADICAL ENCLOSURE", 0x00, "Kangxi"),
    c(0x2F1F, None, "KANGXI RADICAL EARTH", 0x00, "Kangxi"),
    c(0x2F20, None, "KANGXI RADICAL SCHOLAR", 0x00, "Kangxi"),
    c(0x2F21, None, "KANGXI RADICAL GO", 0x00, "Kangxi"),
    c(0x2F22, None, "KANGXI RADICAL GO SLOWLY", 0x00, "Kangxi"),
    c(0x2F23, None, "KANGXI RADICAL EVENING", 0x00, "Kangxi"),
    c(0x2F24, None, "KANGXI RADICAL BIG", 0x00, "Kangxi"),
    c(0x2F25, None, "KANGXI RADICAL WOMAN", 0x00, "Kangxi"),
    c(0x2F26, None, "KANGXI RADICAL CHILD", 0x00, "Kangxi"),
    c(0x2F27, None, "KANGXI RADICAL ROOF", 0x00, "Kangxi"),
    c(0x2F28, None, "KANGXI RADICAL INCH", 0x00, "Kangxi"),
    c(0x2F29, None, "KANGXI RADICAL SMALL", 0x00, "Kangxi"),
    c(0x2F2A, None, "KANGXI RADICAL LAME", 0x00, "Kangxi"),
    c(0x2F2B, None, "KANGXI RADICAL CORPSE", 0x00, "Kangxi"),
    c(0x2F2C, None, "KANGXI RADICAL SPROUT", 0x00, "Kangxi"),
    c(0x2F2D, None, "KANGXI RADICAL MOUNTAIN", 0x00, "Kangxi"),
    c(0x2F2E, None, "KANGXI RADICAL RIVER", 0x00, "Kangxi"),
    c(0x2F2F, None, "KANGXI RADICAL WORK", 0x00, "Kangxi"),
    c(0x2F30, None, "KANGXI RADICAL ONESELF", 0x00, "Kangxi"),
    c(0x2F31, None, "KANGXI RADICAL TURBAN", 0x00, "Kangxi"),
    c(0x2F32, None, "KANGXI RADICAL DRY", 0x00, "Kangxi"),
    c(0x2F33, None, "KANGXI RADICAL SHORT THREAD", 0x00, "Kangxi"),
    c(0x2F34, None, "KANGXI RADICAL DOTTED CLIFF", 0x00, "Kangxi"),
    c(0x2F35, None, "KANGXI RADICAL LONG STRIDE", 0x00, "Kangxi"),
    c(0x2F36, None, "KANGXI RADICAL TWO HANDS", 0x00, "Kangxi"),
    c(0x2F37, None, "KANGXI RADICAL SHOOT", 0x00, "Kangxi"),
    c(0x2F38, None, "KANGXI RADICAL BOW", 0x00, "Kangxi"),
    c(0x2F39, None, "KANGXI RADICAL SNOUT", 0x00, "Kangxi"),
    c(0x2F3A, None, "KANGXI RADICAL BRISTLE", 0x00, "Kangxi"),
    c(0x2F3B, None, "KANGXI RADICAL STEP", 0x00, "Kangxi"),
    c(0x2F3C, None, "KANGXI RADICAL HEART", 0x00, "Kangxi"),
    c(0x2F3D, None, "KANGXI RADICAL HALBERD", 0x00, "Kangxi"),
    c(0x2F3E, None, "KANGXI RADICAL DOOR", 0x00, "Kangxi"),
    c(0x2F3F, None, "KANGXI RADICAL HAND", 0x00, "Kangxi"),
    c(0x2F40, None, "KANGXI RADICAL BRANCH", 0x00, "Kangxi"),
    c(0x2F41, None, "KANGXI RADICAL RAP", 0x00, "Kangxi"),
    c(0x2F42, None, "KANGXI RADICAL SCRIPT", 0x00, "Kangxi"),
    c(0x2F43, None, "KANGXI RADICAL DIPPER", 0x00, "Kangxi"),
    c(0x2F44, None, "KANGXI RADICAL AXE", 0x00, "Kangxi"),
    c(0x2F45, None, "KANGXI RADICAL SQUARE", 0x00, "Kangxi"),
    c(0x2F46, None, "KANGXI RADICAL NOT", 0x00, "Kangxi"),
    c(0x2F47, None, "KANGXI RADICAL SUN", 0x00, "Kangxi"),
    c(0x2F48, None, "KANGXI RADICAL SAY", 0x00, "Kangxi"),
    c(0x2F49, None, "KANGXI RADICAL MOON", 0x00, "Kangxi"),
    c(0x2F4A, None, "KANGXI RADICAL TREE", 0x00, "Kangxi"),
    c(0x2F4B, None, "KANGXI RADICAL LACK", 0x00, "Kangxi"),
    c(0x2F4C, None, "KANGXI RADICAL STOP", 0x00, "Kangxi"),
    c(0x2F4D, None, "KANGXI RADICAL DEATH", 0x00, "Kangxi"),
    c(0x2F4E, None, "KANGXI RADICAL WEAPON", 0x00, "Kangxi"),
    c(0x2F4F, None, "KANGXI RADICAL DO NOT", 0x00, "Kangxi"),
    c(0x2F50, None, "KANGXI RADICAL COMPARE", 0x00, "Kangxi"),
    c(0x2F51, None, "KANGXI RADICAL FUR", 0x00, "Kangxi"),
    c(0x2F52, None, "KANGXI RADICAL CLAN", 0x00, "Kangxi"),
    c(0x2F53, None, "KANGXI RADICAL STEAM", 0x00, "Kangxi"),
    c(0x2F54, None, "KANGXI RADICAL WATER", 0x00, "Kangxi"),
    c(0x2F55, None, "KANGXI RADICAL FIRE", 0x00, "Kangxi"),
    c(0x2F56, None, "KANGXI RADICAL CLAW", 0x00, "Kangxi"),
    c(0x2F57, None, "KANGXI RADICAL FATHER", 0x00, "Kangxi"),
    c(0x2F58, None, "KANGXI RADICAL DOUBLE X", 0x00, "Kangxi"),
    c(0x2F59, None, "KANGXI RADICAL HALF TREE TRUNK", 0x00, "Kangxi"),
    c(0x2F5A, None, "KANGXI RADICAL SLICE", 0x00, "Kangxi"),
    c(0x2F5B, None, "KANGXI RADICAL FANG", 0x00, "Kangxi"),
    c(0x2F5C, None, "KANGXI RADICAL COW", 0x00, "Kangxi"),
    c(0x2F5D, None, "KANGXI RADICAL DOG", 0x00, "Kangxi"),
    c(0x2F5E, None, "KANGXI RADICAL PROFOUND", 0x00, "Kangxi"),
    c(0x2F5F, None, "KANGXI RADICAL JADE", 0x00, "Kangxi"),
    c(0x2F60, None, "KANGXI RADICAL MELON", 0x00, "Kangxi"),
    c(0x2F61, None, "KANGXI RADICAL TILE", 0x00, "Kangxi"),
    c(0x2F62, None, "KANGXI RADICAL SWEET", 0x00, "Kangxi"),
    c(0x2F63, None, "KANGXI RADICAL LIFE", 0x00, "Kangxi"),
    c(0x2F64, None, "KANGXI RADICAL USE", 0x00, "Kangxi"),
    c(0x2F65, None, "KANGXI RADICAL FIELD", 0x00, "Kangxi"),
    c(0x2F66, None, "KANGXI RADICAL BOLT OF CLOTH", 0x00, "Kangxi"),
    c(0x2F67, None, "KANGXI RADICAL SICKNESS", 0x00, "Kangxi"),
    c(0x2F68, None, "KANGXI RADICAL DOTTED TENT", 0x00, "Kangxi"),
    c(0x2F69, None, "KANGXI RADICAL WHITE", 0x00, "Kangxi"),
    c(0x2F6A, None, "KANGXI RADICAL SKIN", 0x00, "Kangxi"),
    c(0x2F6B, None, "KANGXI RADICAL DISH", 0x00, "Kangxi"),
    c(0x2F6C, None, "KANGXI RADICAL EYE", 0x00, "Kangxi"),
    c(0x2F6D, None, "KANGXI RADICAL SPEAR", 0x00, "Kangxi"),
    c(0x2F6E, None, "KANGXI RADICAL ARROW", 0x00, "Kangxi"),
    c(0x2F6F, None, "KANGXI RADICAL STONE", 0x00, "Kangxi"),
    c(0x2F70, None, "KANGXI RADICAL SPIRIT", 0x00, "Kangxi"),
    c(0x2F71, None, "KANGXI RADICAL TRACK", 0x00, "Kangxi"),
    c(0x2F72, None, "KANGXI RADICAL GRAIN", 0x00, "Kangxi"),
    c(0x2F73, None, "KANGXI RADICAL CAVE", 0x00, "Kangxi"),
    c(0x2F74, None, "KANGXI RADICAL STAND", 0x00, "Kangxi"),
    c(0x2F75, None, "KANGXI RADICAL BAMBOO", 0x00, "Kangxi"),
    c(0x2F76, None, "KANGXI RADICAL RICE", 0x00, "Kangxi"),
    c(0x2F77, None, "KANGXI RADICAL SILK", 0x00, "Kangxi"),
    c(0x2F78, None, "KANGXI RADICAL JAR", 0x00, "Kangxi"),
    c(0x2F79, None, "KANGXI RADICAL NET", 0x00, "Kangxi"),
    c(0x2F7A, None, "KANGXI RADICAL SHEEP", 0x00, "Kangxi"),
    c(0x2F7B, None, "KANGXI RADICAL FEATHER", 0x00, "Kangxi"),
    c(0x2F7C, None, "KANGXI RADICAL OLD", 0x00, "Kangxi"),
    c(0x2F7D, None, "KANGXI RADICAL AND", 0x00, "Kangxi"),
    c(0x2F7E, None, "KANGXI RADICAL PLOW", 0x00, "Kangxi"),
    c(0x2F7F, None, "KANGXI RADICAL EAR", 0x00, "Kangxi"),
    c(0x2F80, None, "KANGXI RADICAL BRUSH", 0x00, "Kangxi"),
    c(0x2F81, None, "KANGXI RADICAL MEAT", 0x00, "Kangxi"),
    c(0x2F82, None, "KANGXI RADICAL MINISTER", 0x00, "Kangxi"),
    c(0x2F83, None, "KANGXI RADICAL SELF", 0x00, "Kangxi"),
    c(0x2F84, None, "KANGXI RADICAL ARRIVE", 0x00, "Kangxi"),
    c(0x2F85, None, "KANGXI RADICAL MORTAR", 0x00, "Kangxi"),
    c(0x2F86, None, "KANGXI RADICAL TONGUE", 0x00, "Kangxi"),
    c(0x2F87, None, "KANGXI RADICAL OPPOSE", 0x00, "Kangxi"),
    c(0x2F88, None, "KANGXI RADICAL BOAT", 0x00, "Kangxi"),
    c(0x2F89, None, "KANGXI RADICAL STOPPING", 0x00, "Kangxi"),
    c(0x2F8A, None, "KANGXI RADICAL COLOR", 0x00, "Kangxi"),
    c(0x2F8B, None, "KANGXI RADICAL GRASS", 0x00, "Kangxi"),
    c(0x2F8C, None, "KANGXI RADICAL TIGER", 0x00, "Kangxi"),
    c(0x2F8D, None, "KANGXI RADICAL INSECT", 0x00, "Kangxi"),
    c(0x2F8E, None, "KANGXI RADICAL BLOOD", 0x00, "Kangxi"),
    c(0x2F8F, None, "KANGXI RADICAL WALK ENCLOSURE", 0x00, "Kangxi"),
    c(0x2F90, None, "KANGXI RADICAL CLOTHES", 0x00, "Kangxi"),
    c(0x2F91, None, "KANGXI RADICAL WEST", 0x00, "Kangxi"),
    c(0x2F92, None, "KANGXI RADICAL SEE", 0x00, "Kangxi"),
    c(0x2F93, None, "KANGXI RADICAL HORN", 0x00, "Kangxi"),
    c(0x2F94, None, "KANGXI RADICAL SPEECH", 0x00, "Kangxi"),
    c(0x2F95, None, "KANGXI RADICAL VALLEY", 0x00, "Kangxi"),
    c(0x2F96, None, "KANGXI RADICAL BEAN", 0x00, "Kangxi"),
    c(0x2F97, None, "KANGXI RADICAL PIG", 0x00, "Kangxi"),
    c(0x2F98, None, "KANGXI RADICAL BADGER", 0x00, "Kangxi"),
    c(0x2F99, None, "KANGXI RADICAL SHELL", 0x00, "Kangxi"),
    c(0x2F9A, None, "KANGXI RADICAL RED", 0x00, "Kangxi"),
    c(0x2F9B, None, "KANGXI RADICAL RUN", 0x00, "Kangxi"),
    c(0x2F9C, None, "KANGXI RADICAL FOOT", 0x00, "Kangxi"),
    c(0x2F9D, None, "KANGXI RADICAL BODY", 0x00, "Kangxi"),
    c(0x2F9E, None, "KANGXI RADICAL CART", 0x00, "Kangxi"),
    c(0x2F9F, None, "KANGXI RADICAL BITTER", 0x00, "Kangxi"),
    c(0x2FA0, None, "KANGXI RADICAL MORNING", 0x00, "Kangxi"),
    c(0x2FA1, None, "KANGXI RADICAL WALK", 0x00, "Kangxi"),
    c(0x2FA2, None, "KANGXI RADICAL CITY", 0x00, "Kangxi"),
    c(0x2FA3, None, "KANGXI RADICAL WINE", 0x00, "Kangxi"),
    c(0x2FA4, None, "KANGXI RADICAL DISTINGUISH", 0x00, "Kangxi"),
    c(0x2FA5, None, "KANGXI RADICAL VILLAGE", 0x00, "Kangxi"),
    c(0x2FA6, None, "KANGXI RADICAL GOLD", 0x00, "Kangxi"),
    c(0x2FA7, None, "KANGXI RADICAL LONG", 0x00, "Kangxi"),
    c(0x2FA8, None, "KANGXI RADICAL GATE", 0x00, "Kangxi"),
    c(0x2FA9, None, "KANGXI RADICAL MOUND", 0x00, "Kangxi"),
    c(0x2FAA, None, "KANGXI RADICAL SLAVE", 0x00, "Kangxi"),
    c(0x2FAB, None, "KANGXI RADICAL SHORT TAILED BIRD", 0x00, "Kangxi"),
    c(0x2FAC, None, "KANGXI RADICAL RAIN", 0x00, "Kangxi"),
    c(0x2FAD, None, "KANGXI RADICAL BLUE", 0x00, "Kangxi"),
    c(0x2FAE, None, "KANGXI RADICAL WRONG", 0x00, "Kangxi"),
    c(0x2FAF, None, "KANGXI RADICAL FACE", 0x00, "Kangxi"),
    c(0x2FB0, None, "KANGXI RADICAL LEATHER", 0x00, "Kangxi"),
    c(0x2FB1, None, "KANGXI RADICAL TANNED LEATHER", 0x00, "Kangxi"),
    c(0x2FB2, None, "KANGXI RADICAL LEEK", 0x00, "Kangxi"),
    c(0x2FB3, None, "KANGXI RADICAL SOUND", 0x00, "Kangxi"),
    c(0x2FB4, None, "KANGXI RADICAL LEAF", 0x00, "Kangxi"),
    c(0x2FB5, None, "KANGXI RADICAL WIND", 0x00, "Kangxi"),
    c(0x2FB6, None, "KANGXI RADICAL FLY", 0x00, "Kangxi"),
    c(0x2FB7, None, "KANGXI RADICAL EAT", 0x00, "Kangxi"),
    c(0x2FB8, None, "KANGXI RADICAL HEAD", 0x00, "Kangxi"),
    c(0x2FB9, None, "KANGXI RADICAL FRAGRANT", 0x00, "Kangxi"),
    c(0x2FBA, None, "KANGXI RADICAL HORSE", 0x00, "Kangxi"),
    c(0x2FBB, None, "KANGXI RADICAL BONE", 0x00, "Kangxi"),
    c(0x2FBC, None, "KANGXI RADICAL TALL", 0x00, "Kangxi"),
    c(0x2FBD, None, "KANGXI RADICAL HAIR", 0x00, "Kangxi"),
    c(0x2FBE, None, "KANGXI RADICAL FIGHT", 0x00, "Kangxi"),
    c(0x2FBF, None, "KANGXI RADICAL SACRIFICIAL WINE", 0x00, "Kangxi"),
    c(0x2FC0, None, "KANGXI RADICAL CAULDRON", 0x00, "Kangxi"),
    c(0x2FC1, None, "KANGXI RADICAL GHOST", 0x00, "Kangxi"),
    c(0x2FC2, None, "KANGXI RADICAL FISH", 0x00, "Kangxi"),
    c(0x2FC3, None, "KANGXI RADICAL BIRD", 0x00, "Kangxi"),
    c(0x2FC4, None, "KANGXI RADICAL SALT", 0x00, "Kangxi"),
    c(0x2FC5, None, "KANGXI RADICAL DEER", 0x00, "Kangxi"),
    c(0x2FC6, None, "KANGXI RADICAL WHEAT", 0x00, "Kangxi"),
    c(0x2FC7, None, "KANGXI RADICAL HEMP", 0x00, "Kangxi"),
    c(0x2FC8, None, "KANGXI RADICAL YELLOW", 0x00, "Kangxi"),
    c(0x2FC9, None, "KANGXI RADICAL MILLET", 0x00, "Kangxi"),
    c(0x2FCA, None, "KANGXI RADICAL BLACK", 0x00, "Kangxi"),
    c(0x2FCB, None, "KANGXI RADICAL EMBROIDERY", 0x00, "Kangxi"),
    c(0x2FCC, None, "KANGXI RADICAL FROG", 0x00, "Kangxi"),
    c(0x2FCD, None, "KANGXI RADICAL TRIPOD", 0x00, "Kangxi"),
    c(0x2FCE, None, "KANGXI RADICAL DRUM", 0x00, "Kangxi"),
    c(0x2FCF, None, "KANGXI RADICAL RAT", 0x00, "Kangxi"),
    c(0x2FD0, None, "KANGXI RADICAL NOSE", 0x00, "Kangxi"),
    c(0x2FD1, None, "KANGXI RADICAL EVEN", 0x00, "Kangxi"),
    c(0x2FD2, None, "KANGXI RADICAL TOOTH", 0x00, "Kangxi"),
    c(0x2FD3, None, "KANGXI RADICAL DRAGON", 0x00, "Kangxi"),
    c(0x2FD4, None, "KANGXI RADICAL TURTLE", 0x00, "Kangxi"),
    c(0x2FD5, None, "KANGXI RADICAL FLUTE", 0x00, "Kangxi"),
    c(0x2FF0, None, "IDEOGRAPHIC DESCRIPTION CHARACTER LEFT TO RIGHT", 0x00, "IDC"),
    c(0x2FF1, None, "IDEOGRAPHIC DESCRIPTION CHARACTER ABOVE TO BELOW", 0x00, "IDC"),
    c(0x2FF2, None, "IDEOGRAPHIC DESCRIPTION CHARACTER LEFT TO MIDDLE AND RIGHT", 0x00, "IDC"),
    c(0x2FF3, None, "IDEOGRAPHIC DESCRIPTION CHARACTER ABOVE TO MIDDLE AND BELOW", 0x00, "IDC"),
    c(0x2FF4, None, "IDEOGRAPHIC DESCRIPTION CHARACTER FULL SURROUND", 0x00, "IDC"),
    c(0x2FF5, None, "IDEOGRAPHIC DESCRIPTION CHARACTER SURROUND FROM ABOVE", 0x00, "IDC"),
    c(0x2FF6, None, "IDEOGRAPHIC DESCRIPTION CHARACTER SURROUND FROM BELOW", 0x00, "IDC"),
    c(0x2FF7, None, "IDEOGRAPHIC DESCRIPTION CHARACTER SURROUND FROM LEFT", 0x00, "IDC"),
    c(0x2FF8, None, "IDEOGRAPHIC DESCRIPTION CHARACTER SURROUND FROM UPPER LEFT", 0x00, "IDC"),
    c(0x2FF9, None, "IDEOGRAPHIC DESCRIPTION CHARACTER SURROUND FROM UPPER RIGHT", 0x00, "IDC"),
    c(0x2FFA, None, "IDEOGRAPHIC DESCRIPTION CHARACTER SURROUND FROM LOWER LEFT", 0x00, "IDC"),
    c(0x2FFB, None, "IDEOGRAPHIC DESCRIPTION CHARACTER OVERLAID", 0x00, "IDC"),
    c(0x3000, None, "IDEOGRAPHIC SPACE", 0x00, "CJK_Symbols"),
    c(0x3001, None, "IDEOGRAPHIC COMMA", 0x00, "CJK_Symbols"),
    c(0x3002, None, "IDEOGRAPHIC FULL STOP", 0x00, "CJK_Symbols"),
    c(0x3003, None, "DITTO MARK", 0x00, "CJK_Symbols"),
    c(0x3004, None, "JAPANESE INDUSTRIAL STANDARD SYMBOL", 0x00, "CJK_Symbols"),
    c(0x3005, None, "IDEOGRAPHIC ITERATION MARK", 0x31, "CJK_Symbols"),
    c(0x3006, None, "IDEOGRAPHIC CLOSING MARK", 0x31, "CJK_Symbols"),
    c(0x3007, None, "IDEOGRAPHIC NUMBER ZERO", 0x31, "CJK_Symbols"),
    c(0x3008, None, "LEFT ANGLE BRACKET", 0x00, "CJK_Symbols"),
    c(0x3009, None, "RIGHT ANGLE BRACKET", 0x00, "CJK_Symbols"),
    c(0x300A, None, "LEFT DOUBLE ANGLE BRACKET", 0x00, "CJK_Symbols"),
    c(0x300B, None, "RIGHT DOUBLE ANGLE BRACKET", 0x00, "CJK_Symbols"),
    c(0x300C, None, "LEFT CORNER BRACKET", 0x00, "CJK_Symbols"),
    c(0x300D, None, "RIGHT CORNER BRACKET", 0x00, "CJK_Symbols"),
    c(0x300E, None, "LEFT WHITE CORNER BRACKET", 0x00, "CJK_Symbols"),
    c(0x300F, None, "RIGHT WHITE CORNER BRACKET", 0x00, "CJK_Symbols"),
    c(0x3010, None, "LEFT BLACK LENTICULAR BRACKET", 0x00, "CJK_Symbols"),
    c(0x3011, None, "RIGHT BLACK LENTICULAR BRACKET", 0x00, "CJK_Symbols"),
    c(0x3012, None, "POSTAL MARK", 0x00, "CJK_Symbols"),
    c(0x3013, None, "GETA MARK", 0x00, "CJK_Symbols"),
    c(0x3014, None, "LEFT TORTOISE SHELL BRACKET", 0x00, "CJK_Symbols"),
    c(0x3015, None, "RIGHT TORTOISE SHELL BRACKET", 0x00, "CJK_Symbols"),
    c(0x3016, None, "LEFT WHITE LENTICULAR BRACKET", 0x00, "CJK_Symbols"),
    c(0x3017, None, "RIGHT WHITE LENTICULAR BRACKET", 0x00, "CJK_Symbols"),
    c(0x3018, None, "LEFT WHITE TORTOISE SHELL BRACKET", 0x00, "CJK_Symbols"),
    c(0x3019, None, "RIGHT WHITE TORTOISE SHELL BRACKET", 0x00, "CJK_Symbols"),
    c(0x301A, None, "LEFT WHITE SQUARE BRACKET", 0x00, "CJK_Symbols"),
    c(0x301B, None, "RIGHT WHITE SQUARE BRACKET", 0x00, "CJK_Symbols"),
    c(0x301C, None, "WAVE DASH", 0x00, "CJK_Symbols"),
    c(0x301D, None, "REVERSED DOUBLE PRIME QUOTATION MARK", 0x00, "CJK_Symbols"),
    c(0x301E, None, "DOUBLE PRIME QUOTATION MARK", 0x00, "CJK_Symbols"),
    c(0x301F, None, "LOW DOUBLE PRIME QUOTATION MARK", 0x00, "CJK_Symbols"),
    c(0x3020, None, "POSTAL MARK FACE", 0x00, "CJK_Symbols"),
    c(0x3021, None, "HANGZHOU NUMERAL ONE", 0x31, "CJK_Symbols"),
    c(0x3022, None, "HANGZHOU NUMERAL TWO", 0x31, "CJK_Symbols"),
    c(0x3023, None, "HANGZHOU NUMERAL THREE", 0x31, "CJK_Symbols"),
    c(0x3024, None, "HANGZHOU NUMERAL FOUR", 0x31, "CJK_Symbols"),
    c(0x3025, None, "HANGZHOU NUMERAL FIVE", 0x31, "CJK_Symbols"),
    c(0x3026, None, "HANGZHOU NUMERAL SIX", 0x31, "CJK_Symbols"),
    c(0x3027, None, "HANGZHOU NUMERAL SEVEN", 0x31, "CJK_Symbols"),
    c(0x3028, None, "HANGZHOU NUMERAL EIGHT", 0x31, "CJK_Symbols"),
    c(0x3029, None, "HANGZHOU NUMERAL NINE", 0x31, "CJK_Symbols"),
    c(0x302A, None, "IDEOGRAPHIC LEVEL TONE MARK", 0x20, "CJK_Symbols"),
    c(0x302B, None, "IDEOGRAPHIC RISING TONE MARK", 0x20, "CJK_Symbols"),
    c(0x302C, None, "IDEOGRAPHIC DEPARTING TONE MARK", 0x20, "CJK_Symbols"),
    c(0x302D, None, "IDEOGRAPHIC ENTERING TONE MARK", 0x20, "CJK_Symbols"),
    c(0x302E, None, "HANGUL SINGLE DOT TONE MARK", 0x20, "CJK_Symbols"),
    c(0x302F, None, "HANGUL DOUBLE DOT TONE MARK", 0x20, "CJK_Symbols"),
    c(0x3030, None, "WAVY DASH", 0x00, "CJK_Symbols"),
    c(0x3031, None, "VERTICAL KANA REPEAT MARK", 0x31, "CJK_Symbols"),
    c(0x3032, None, "VERTICAL KANA REPEAT WITH VOICED SOUND MARK", 0x31, "CJK_Symbols"),
    c(0x3033, None, "VERTICAL KANA REPEAT MARK UPPER HALF", 0x31, "CJK_Symbols"),
    c(0x3034, None, "VERTICAL KANA REPEAT WITH VOICED SOUND MARK UPPER HALF", 0x31, "CJK_Symbols"),
    c(0x3035, None, "VERTICAL KANA REPEAT MARK LOWER HALF", 0x31, "CJK_Symbols"),
    c(0x3036, None, "CIRCLED POSTAL MARK", 0x00, "CJK_Symbols"),
    c(0x3037, None, "IDEOGRAPHIC TELEGRAPH LINE FEED SEPARATOR SYMBOL", 0x00, "CJK_Symbols"),
    c(0x3038, None, "HANGZHOU NUMERAL TEN", 0x31, "CJK_Symbols"),
    c(0x3039, None, "HANGZHOU NUMERAL TWENTY", 0x31, "CJK_Symbols"),
    c(0x303A, None, "HANGZHOU NUMERAL THIRTY", 0x31, "CJK_Symbols"),
    c(0x303B, None, "VERTICAL IDEOGRAPHIC ITERATION MARK", 0x31, "CJK_Symbols"),
    c(0x303C, None, "MASU MARK", 0x31, "CJK_Symbols"),
    c(0x303D, None, "PART ALTERNATION MARK", 0x00, "CJK_Symbols"),
    c(0x303E, None, "IDEOGRAPHIC VARIATION INDICATOR", 0x00, "CJK_Symbols"),
    c(0x303F, None, "IDEOGRAPHIC HALF FILL SPACE", 0x00, "CJK_Symbols"),
    c(0x3041, None, "HIRAGANA LETTER SMALL A", 0x31, "Hiragana"),
    c(0x3042, None, "HIRAGANA LETTER A", 0x31, "Hiragana"),
    c(0x3043, None, "HIRAGANA LETTER SMALL I", 0x31, "Hiragana"),
    c(0x3044, None, "HIRAGANA LETTER I", 0x31, "Hiragana"),
    c(0x3045, None, "HIRAGANA LETTER SMALL U", 0x31, "Hiragana"),
    c(0x3046, None, "HIRAGANA LETTER U", 0x31, "Hiragana"),
    c(0x3047, None, "HIRAGANA LETTER SMALL E", 0x31, "Hiragana"),
    c(0x3048, None, "HIRAGANA LETTER E", 0x31, "Hiragana"),
    c(0x3049, None, "HIRAGANA LETTER SMALL O", 0x31, "Hiragana"),
    c(0x304A, None, "HIRAGANA LETTER O", 0x31, "Hiragana"),
    c(0x304B, None, "HIRAGANA LETTER KA", 0x31, "Hiragana"),
    c(0x304C, None, "HIRAGANA LETTER GA", 0x31, "Hiragana"),
    c(0x304D, None, "HIRAGANA LETTER KI", 0x31, "Hiragana"),
    c(0x304E, None, "HIRAGANA LETTER GI", 0x31, "Hiragana"),
    c(0x304F, None, "HIRAGANA LETTER KU", 0x31, "Hiragana"),
    c(0x3050, None, "HIRAGANA LETTER GU", 0x31, "Hiragana"),
    c(0x3051, None, "HIRAGANA LETTER KE", 0x31, "Hiragana"),
    c(0x3052, None, "HIRAGANA LETTER GE", 0x31, "Hiragana"),
    c(0x3053, None, "HIRAGANA LETTER KO", 0x31, "Hiragana"),
    c(0x3054, None, "HIRAGANA LETTER GO", 0x31, "Hiragana"),
    c(0x3055, None, "HIRAGANA LETTER SA", 0x31, "Hiragana"),
    c(0x3056, None, "HIRAGANA LETTER ZA", 0x31, "Hiragana"),
    c(0x3057, None, "HIRAGANA LETTER SI", 0x31, "Hiragana"),
    c(0x3058, None, "HIRAGANA LETTER ZI", 0x31, "Hiragana"),
    c(0x3059, None, "HIRAGANA LETTER SU", 0x31, "Hiragana"),
    c(0x305A, None, "HIRAGANA LETTER ZU", 0x31, "Hiragana"),
    c(0x305B, None, "HIRAGANA LETTER SE", 0x31, "Hiragana"),
    c(0x305C, None, "HIRAGANA LETTER ZE", 0x31, "Hiragana"),
    c(0x305D, None, "HIRAGANA LETTER SO", 0x31, "Hiragana"),
    c(0x305E, None, "HIRAGANA LETTER ZO", 0x31, "Hiragana"),
    c(0x305F, None, "HIRAGANA LETTER TA", 0x31, "Hiragana"),
    c(0x3060, None, "HIRAGANA LETTER DA", 0x31, "Hiragana"),
    c(0x3061, None, "HIRAGANA LETTER TI", 0x31, "Hiragana"),
    c(0x3062, None, "HIRAGANA LETTER DI", 0x31, "Hiragana"),
    c(0x3063, None, "HIRAGANA LETTER SMALL TU", 0x31, "Hiragana"),
    c(0x3064, None, "HIRAGANA LETTER TU", 0x31, "Hiragana"),
    c(0x3065, None, "HIRAGANA LETTER DU", 0x31, "Hiragana"),
    c(0x3066, None, "HIRAGANA LETTER TE", 0x31, "Hiragana"),
    c(0x3067, None, "HIRAGANA LETTER DE", 0x31, "Hiragana"),
    c(0x3068, None, "HIRAGANA LETTER TO", 0x31, "Hiragana"),
    c(0x3069, None, "HIRAGANA LETTER DO", 0x31, "Hiragana"),
    c(0x306A, None, "HIRAGANA LETTER NA", 0x31, "Hiragana"),
    c(0x306B, None, "HIRAGANA LETTER NI", 0x31, "Hiragana"),
    c(0x306C, None, "HIRAGANA LETTER NU", 0x31, "Hiragana"),
    c(0x306D, None, "HIRAGANA LETTER NE", 0x31, "Hiragana"),
    c(0x306E, None, "HIRAGANA LETTER NO", 0x31, "Hiragana"),
    c(0x306F, None, "HIRAGANA LETTER HA", 0x31, "Hiragana"),
    c(0x3070, None, "HIRAGANA LETTER BA", 0x31, "Hiragana"),
    c(0x3071, None, "HIRAGANA LETTER PA", 0x31, "Hiragana"),
    c(0x3072, None, "HIRAGANA LETTER HI", 0x31, "Hiragana"),
    c(0x3073, None, "HIRAGANA LETTER BI", 0x31, "Hiragana"),
    c(0x3074, None, "HIRAGANA LETTER PI", 0x31, "Hiragana"),
    c(0x3075, None, "HIRAGANA LETTER HU", 0x31, "Hiragana"),
    c(0x3076, None, "HIRAGANA LETTER BU", 0x31, "Hiragana"),
    c(0x3077, None, "HIRAGANA LETTER PU", 0x31, "Hiragana"),
    c(0x3078, None, "HIRAGANA LETTER HE", 0x31, "Hiragana"),
    c(0x3079, None, "HIRAGANA LETTER BE", 0x31, "Hiragana"),
    c(0x307A, None, "HIRAGANA LETTER PE", 0x31, "Hiragana"),
    c(0x307B, None, "HIRAGANA LETTER HO", 0x31, "Hiragana"),
    c(0x307C, None, "HIRAGANA LETTER BO", 0x31, "Hiragana"),
    c(0x307D, None, "HIRAGANA LETTER PO", 0x31, "Hiragana"),
    c(0x307E, None, "HIRAGANA LETTER MA", 0x31, "Hiragana"),
    c(0x307F, None, "HIRAGANA LETTER MI", 0x31, "Hiragana"),
    c(0x3080, None, "HIRAGANA LETTER MU", 0x31, "Hiragana"),
    c(0x3081, None, "HIRAGANA LETTER ME", 0x31, "Hiragana"),
    c(0x3082, None, "HIRAGANA LETTER MO", 0x31, "Hiragana"),
    c(0x3083, None, "HIRAGANA LETTER SMALL YA", 0x31, "Hiragana"),
    c(0x3084, None, "HIRAGANA LETTER YA", 0x31, "Hiragana"),
    c(0x3085, None, "HIRAGANA LETTER SMALL YU", 0x31, "Hiragana"),
    c(0x3086, None, "HIRAGANA LETTER YU", 0x31, "Hiragana"),
    c(0x3087, None, "HIRAGANA LETTER SMALL YO", 0x31, "Hiragana"),
    c(0x3088, None, "HIRAGANA LETTER YO", 0x31, "Hiragana"),
    c(0x3089, None, "HIRAGANA LETTER RA", 0x31, "Hiragana"),
    c(0x308A, None, "HIRAGANA LETTER RI", 0x31, "Hiragana"),
    c(0x308B, None, "HIRAGANA LETTER RU", 0x31, "Hiragana"),
    c(0x308C, None, "HIRAGANA LETTER RE", 0x31, "Hiragana"),
    c(0x308D, None, "HIRAGANA LETTER RO", 0x31, "Hiragana"),
    c(0x308E, None, "HIRAGANA LETTER SMALL WA", 0x31, "Hiragana"),
    c(0x308F, None, "HIRAGANA LETTER WA", 0x31, "Hiragana"),
    c(0x3090, None, "HIRAGANA LETTER WI", 0x31, "Hiragana"),
    c(0x3091, None, "HIRAGANA LETTER WE", 0x31, "Hiragana"),
    c(0x3092, None, "HIRAGANA LETTER WO", 0x31, "Hiragana"),
    c(0x3093, None, "HIRAGANA LETTER N", 0x31, "Hiragana"),
    c(0x3094, None, "HIRAGANA LETTER VU", 0x31, "Hiragana"),
    c(0x3095, None, "HIRAGANA LETTER SMALL KA", 0x31, "Hiragana"),
    c(0x3096, None, "HIRAGANA LETTER SMALL KE", 0x31, "Hiragana"),
    c(0x3099, None, "COMBINING KATAKANA-HIRAGANA VOICED SOUND MARK", 0x20, "Hiragana"),
    c(0x309A, None, "COMBINING KATAKANA-HIRAGANA SEMI-VOICED SOUND MARK", 0x20, "Hiragana"),
    c(0x309B, None, "KATAKANA-HIRAGANA VOICED SOUND MARK", 0x00, "Hiragana"),
    c(0x309C, None, "KATAKANA-HIRAGANA SEMI-VOICED SOUND MARK", 0x00, "Hiragana"),
    c(0x309D, None, "HIRAGANA ITERATION MARK", 0x31, "Hiragana"),
    c(0x309E, None, "HIRAGANA VOICED ITERATION MARK", 0x31, "Hiragana"),
    c(0x309F, None, "HIRAGANA DIGRAPH YORI", 0x31, "Hiragana"),
    c(0x30A0, None, "KATAKANA-HIRAGANA DOUBLE HYPHEN", 0x00, "Katakana"),
    c(0x30A1, None, "KATAKANA LETTER SMALL A", 0x31, "Katakana"),
    c(0x30A2, None, "KATAKANA LETTER A", 0x31, "Katakana"),
    c(0x30A3, None, "KATAKANA LETTER SMALL I", 0x31, "Katakana"),
    c(0x30A4, None, "KATAKANA LETTER I", 0x31, "Katakana"),
    c(0x30A5, None, "KATAKANA LETTER SMALL U", 0x31, "Katakana"),
    c(0x30A6, None, "KATAKANA LETTER U", 0x31, "Katakana"),
    c(0x30A7, None, "KATAKANA LETTER SMALL E", 0x31, "Katakana"),
    c(0x30A8, None, "KATAKANA LETTER E", 0x31, "Katakana"),
    c(0x30A9, None, "KATAKANA LETTER SMALL O", 0x31, "Katakana"),
    c(0x30AA, None, "KATAKANA LETTER O", 0x31, "Katakana"),
    c(0x30AB, None, "KATAKANA LETTER KA", 0x31, "Katakana"),
    c(0x30AC, None, "KATAKANA LETTER GA", 0x31, "Katakana"),
    c(0x30AD, None, "KATAKANA LETTER KI", 0x31, "Katakana"),
    c(0x30AE, None, "KATAKANA LETTER GI", 0x31, "Katakana"),
    c(0x30AF, None, "KATAKANA LETTER KU", 0x31, "Katakana"),
    c(0x30B0, None, "KATAKANA LETTER GU", 0x31, "Katakana"),
    c(0x30B1, None, "KATAKANA LETTER KE", 0x31, "Katakana"),
    c(0x30B2, None, "KATAKANA LETTER GE", 0x31, "Katakana"),
    c(0x30B3, None, "KATAKANA LETTER KO", 0x31, "Katakana"),
    c(0x30B4, None, "KATAKANA LETTER GO", 0x31, "Katakana"),
    c(0x30B5, None, "KATAKANA LETTER SA", 0x31, "Katakana"),
    c(0x30B6, None, "KATAKANA LETTER ZA", 0x31, "Katakana"),
    c(0x30B7, None, "KATAKANA LETTER SI", 0x31, "Katakana"),
    c(0x30B8, None, "KATAKANA LETTER ZI", 0x31, "Katakana"),
    c(0x30B9, None, "KATAKANA LETTER SU", 0x31, "Katakana"),
    c(0x30BA, None, "KATAKANA LETTER ZU", 0x31, "Katakana"),
    c(0x30BB, None, "KATAKANA LETTER SE", 0x31, "Katakana"),
    c(0x30BC, None, "KATAKANA LETTER ZE", 0x31, "Katakana"),
    c(0x30BD, None, "KATAKANA LETTER SO", 0x31, "Katakana"),
    c(0x30BE, None, "KATAKANA LETTER ZO", 0x31, "Katakana"),
    c(0x30BF, None, "KATAKANA LETTER TA", 0x31, "Katakana"),
    c(0x30C0, None, "KATAKANA LETTER DA", 0x31, "Katakana"),
    c(0x30C1, None, "KATAKANA LETTER TI", 0x31, "Katakana"),
    c(0x30C2, None, "KATAKANA LETTER DI", 0x31, "Katakana"),
    c(0x30C3, None, "KATAKANA LETTER SMALL TU", 0x31, "Katakana"),
    c(0x30C4, None, "KATAKANA LETTER TU", 0x31, "Katakana"),
    c(0x30C5, None, "KATAKANA LETTER DU", 0x31, "Katakana"),
    c(0x30C6, None, "KATAKANA LETTER TE", 0x31, "Katakana"),
    c(0x30C7, None, "KATAKANA LETTER DE", 0x31, "Katakana"),
    c(0x30C8, None, "KATAKANA LETTER TO", 0x31, "Katakana"),
    c(0x30C9, None, "KATAKANA LETTER DO", 0x31, "Katakana"),
    c(0x30CA, None, "KATAKANA LETTER NA", 0x31, "Katakana"),
    c(0x30CB, None, "KATAKANA LETTER NI", 0x31, "Katakana"),
    c(0x30CC, None, "KATAKANA LETTER NU", 0x31, "Katakana"),
    c(0x30CD, None, "KATAKANA LETTER NE", 0x31, "Katakana"),
    c(0x30CE, None, "KATAKANA LETTER NO", 0x31, "Katakana"),
    c(0x30CF, None, "KATAKANA LETTER HA", 0x31, "Katakana"),
    c(0x30D0, None, "KATAKANA LETTER BA", 0x31, "Katakana"),
    c(0x30D1, None, "KATAKANA LETTER PA", 0x31, "Katakana"),
    c(0x30D2, None, "KATAKANA LETTER HI", 0x31, "Katakana"),
    c(0x30D3, None, "KATAKANA LETTER BI", 0x31, "Katakana"),
    c(0x30D4, None, "KATAKANA LETTER PI", 0x31, "Katakana"),
    c(0x30D5, None, "KATAKANA LETTER HU", 0x31, "Katakana"),
    c(0x30D6, None, "KATAKANA LETTER BU", 0x31, "Katakana"),
    c(0x30D7, None, "KATAKANA LETTER PU", 0x31, "Katakana"),
    c(0x30D8, None, "KATAKANA LETTER HE", 0x31, "Katakana"),
    c(0x30D9, None, "KATAKANA LETTER BE", 0x31, "Katakana"),
    c(0x30DA, None, "KATAKANA LETTER PE", 0x31, "Katakana"),
    c(0x30DB, None, "KATAKANA LETTER HO", 0x31, "Katakana"),
    c(0x30DC, None, "KATAKANA LETTER BO", 0x31, "Katakana"),
    c(0x30DD, None, "KATAKANA LETTER PO", 0x31, "Katakana"),
    c(0x30DE, None, "KATAKANA LETTER MA", 0x31, "Katakana"),
    c(0x30DF, None, "KATAKANA LETTER MI", 0x31, "Katakana"),
    c(0x30E0, None, "KATAKANA LETTER MU", 0x31, "Katakana"),
    c(0x30E1, None, "KATAKANA LETTER ME", 0x31, "Katakana"),
    c(0x30E2, None, "KATAKANA LETTER MO", 0x31, "Katakana"),
    c(0x30E3, None, "KATAKANA LETTER SMALL YA", 0x31, "Katakana"),
    c(0x30E4, None, "KATAKANA LETTER YA", 0x31, "Katakana"),
    c(0x30E5, None, "KATAKANA LETTER SMALL YU", 0x31, "Katakana"),
    c(0x30E6, None, "KATAKANA LETTER YU", 0x31, "Katakana"),
    c(0x30E7, None, "KATAKANA LETTER SMALL YO", 0x31, "Katakana"),
    c(0x30E8, None, "KATAKANA LETTER YO", 0x31, "Katakana"),
    c(0x30E9, None, "KATAKANA LETTER RA", 0x31, "Katakana"),
    c(0x30EA, None, "KATAKANA LETTER RI", 0x31, "Katakana"),
    c(0x30EB, None, "KATAKANA LETTER RU", 0x31, "Katakana"),
    c(0x30EC, None, "KATAKANA LETTER RE", 0x31, "Katakana"),
    c(0x30ED, None, "KATAKANA LETTER RO", 0x31, "Katakana"),
    c(0x30EE, None, "KATAKANA LETTER SMALL WA", 0x31, "Katakana"),
    c(0x30EF, None, "KATAKANA LETTER WA", 0x31, "Katakana"),
    c(0x30F0, None, "KATAKANA LETTER WI", 0x31, "Katakana"),
    c(0x30F1, None, "KATAKANA LETTER WE", 0x31, "Katakana"),
    c(0x30F2, None, "KATAKANA LETTER WO", 0x31, "Katakana"),
    c(0x30F3, None, "KATAKANA LETTER N", 0x31, "Katakana"),
    c(0x30F4, None, "KATAKANA LETTER VU", 0x31, "Katakana"),
    c(0x30F5, None, "KATAKANA LETTER SMALL KA", 0x31, "Katakana"),
    c(0x30F6, None, "KATAKANA LETTER SMALL KE", 0x31, "Katakana"),
    c(0x30F7, None, "KATAKANA LETTER VA", 0x31, "Katakana"),
    c(0x30F8, None, "KATAKANA LETTER VI", 0x31, "Katakana"),
    c(0x30F9, None, "KATAKANA LETTER VE", 0x31, "Katakana"),
    c(0x30FA, None, "KATAKANA LETTER VO", 0x31, "Katakana"),
    c(0x30FB, None, "KATAKANA MIDDLE DOT", 0x00, "Katakana"),
    c(0x30FC, None, "KATAKANA-HIRAGANA PROLONGED SOUND MARK", 0x31, "Katakana"),
    c(0x30FD, None, "KATAKANA ITERATION MARK", 0x31, "Katakana"),
    c(0x30FE, None, "KATAKANA VOICED ITERATION MARK", 0x31, "Katakana"),
    c(0x30FF, None, "KATAKANA DIGRAPH KOTO", 0x31, "Katakana"),
    c(0x3105, None, "BOPOMOFO LETTER B", 0x31, "Bopomofo"),
    c(0x3106, None, "BOPOMOFO LETTER P", 0x31, "Bopomofo"),
    c(0x3107, None, "BOPOMOFO LETTER M", 0x31, "Bopomofo"),
    c(0x3108, None, "BOPOMOFO LETTER F", 0x31, "Bopomofo"),
    c(0x3109, None, "BOPOMOFO LETTER D", 0x31, "Bopomofo"),
    c(0x310A, None, "BOPOMOFO LETTER T", 0x31, "Bopomofo"),
    c(0x310B, None, "BOPOMOFO LETTER N", 0x31, "Bopomofo"),
    c(0x310C, None, "BOPOMOFO LETTER L", 0x31, "Bopomofo"),
    c(0x310D, None, "BOPOMOFO LETTER G", 0x31, "Bopomofo"),
    c(0x310E, None, "BOPOMOFO LETTER K", 0x31, "Bopomofo"),
    c(0x310F, None, "BOPOMOFO LETTER H", 0x31, "Bopomofo"),
    c(0x3110, None, "BOPOMOFO LETTER J", 0x31, "Bopomofo"),
    c(0x3111, None, "BOPOMOFO LETTER Q", 0x31, "Bopomofo"),
    c(0x3112, None, "BOPOMOFO LETTER X", 0x31, "Bopomofo"),
    c(0x3113, None, "BOPOMOFO LETTER ZH", 0x31, "Bopomofo"),
    c(0x3114, None, "BOPOMOFO LETTER CH", 0x31, "Bopomofo"),
    c(0x3115, None, "BOPOMOFO LETTER SH", 0x31, "Bopomofo"),
    c(0x3116, None, "BOPOMOFO LETTER R", 0x31, "Bopomofo"),
    c(0x3117, None, "BOPOMOFO LETTER Z", 0x31, "Bopomofo"),
    c(0x3118, None, "BOPOMOFO LETTER C", 0x31, "Bopomofo"),
    c(0x3119, None, "BOPOMOFO LETTER S", 0x31, "Bopomofo"),
    c(0x311A, None, "BOPOMOFO LETTER A", 0x31, "Bopomofo"),
    c(0x311B, None, "BOPOMOFO LETTER O", 0x31, "Bopomofo"),
    c(0x311C, None, "BOPOMOFO LETTER E", 0x31, "Bopomofo"),
    c(0x311D, None, "BOPOMOFO LETTER EH", 0x31, "Bopomofo"),
    c(0x311E, None, "BOPOMOFO LETTER AI", 0x31, "Bopomofo"),
    c(0x311F, None, "BOPOMOFO LETTER EI", 0x31, "Bopomofo"),
    c(0x3120, None, "BOPOMOFO LETTER AU", 0x31, "Bopomofo"),
    c(0x3121, None, "BOPOMOFO LETTER OU", 0x31, "Bopomofo"),
    c(0x3122, None, "BOPOMOFO LETTER AN", 0x31, "Bopomofo"),
    c(0x3123, None, "BOPOMOFO LETTER EN", 0x31, "Bopomofo"),
    c(0x3124, None, "BOPOMOFO LETTER ANG", 0x31, "Bopomofo"),
    c(0x3125, None, "BOPOMOFO LETTER ENG", 0x31, "Bopomofo"),
    c(0x3126, None, "BOPOMOFO LETTER ER", 0x31, "Bopomofo"),
    c(0x3127, None, "BOPOMOFO LETTER I", 0x31, "Bopomofo"),
    c(0x3128, None, "BOPOMOFO LETTER U", 0x31, "Bopomofo"),
    c(0x3129, None, "BOPOMOFO LETTER IU", 0x31, "Bopomofo"),
    c(0x312A, None, "BOPOMOFO LETTER V", 0x31, "Bopomofo"),
    c(0x312B, None, "BOPOMOFO LETTER NG", 0x31, "Bopomofo"),
    c(0x312C, None, "BOPOMOFO LETTER GN", 0x31, "Bopomofo"),
    c(0x312D, None, "BOPOMOFO LETTER IH", 0x31, "Bopomofo"),
    c(0x312E, None, "BOPOMOFO LETTER O WITH DOT ABOVE", 0x31, "Bopomofo"),
    c(0x312F, None, "BOPOMOFO LETTER NN", 0x31, "Bopomofo"),
    c(0x3131, None, "HANGUL LETTER KIYEOK", 0x31, "Compat_Jamo"),
    c(0x3132, None, "HANGUL LETTER SSANGKIYEOK", 0x31, "Compat_Jamo"),
    c(0x3133, None, "HANGUL LETTER KIYEOK-SIOS", 0x31, "Compat_Jamo"),
    c(0x3134, None, "HANGUL LETTER NIEUN", 0x31, "Compat_Jamo"),
    c(0x3135, None, "HANGUL LETTER NIEUN-CIEUC", 0x31, "Compat_Jamo"),
    c(0x3136, None, "HANGUL LETTER NIEUN-HIEUH", 0x31, "Compat_Jamo"),
    c(0x3137, None, "HANGUL LETTER TIKEUT", 0x31, "Compat_Jamo"),
    c(0x3138, None, "HANGUL LETTER SSANGTIKEUT", 0x31, "Compat_Jamo"),
    c(0x3139, None, "HANGUL LETTER RIEUL", 0x31, "Compat_Jamo"),
    c(0x313A, None, "HANGUL LETTER RIEUL-KIYEOK", 0x31, "Compat_Jamo"),
    c(0x313B, None, "HANGUL LETTER RIEUL-MIEUM", 0x31, "Compat_Jamo"),
    c(0x313C, None, "HANGUL LETTER RIEUL-PIEUP", 0x31, "Compat_Jamo"),
    c(0x313D, None, "HANGUL LETTER RIEUL-SIOS", 0x31, "Compat_Jamo"),
    c(0x313E, None, "HANGUL LETTER RIEUL-THIEUTH", 0x31, "Compat_Jamo"),
    c(0x313F, None, "HANGUL LETTER RIEUL-PHIEUPH", 0x31, "Compat_Jamo"),
    c(0x3140, None, "HANGUL LETTER RIEUL-HIEUH", 0x31, "Compat_Jamo"),
    c(0x3141, None, "HANGUL LETTER MIEUM", 0x31, "Compat_Jamo"),
    c(0x3142, None, "HANGUL LETTER PIEUP", 0x31, "Compat_Jamo"),
    c(0x3143, None, "HANGUL LETTER SSANGPIEUP", 0x31, "Compat_Jamo"),
    c(0x3144, None, "HANGUL LETTER PIEUP-SIOS", 0x31, "Compat_Jamo"),
    c(0x3145, None, "HANGUL LETTER SIOS", 0x31, "Compat_Jamo"),
    c(0x3146, None, "HANGUL LETTER SSANGSIOS", 0x31, "Compat_Jamo"),
    c(0x3147, None, "HANGUL LETTER IEUNG", 0x31, "Compat_Jamo"),
    c(0x3148, None, "HANGUL LETTER CIEUC", 0x31, "Compat_Jamo"),
    c(0x3149, None, "HANGUL LETTER SSANGCIEUC", 0x31, "Compat_Jamo"),
    c(0x314A, None, "HANGUL LETTER CHIEUCH", 0x31, "Compat_Jamo"),
    c(0x314B, None, "HANGUL LETTER KHIEUKH", 0x31, "Compat_Jamo"),
    c(0x314C, None, "HANGUL LETTER THIEUTH", 0x31, "Compat_Jamo"),
    c(0x314D, None, "HANGUL LETTER PHIEUPH", 0x31, "Compat_Jamo"),
    c(0x314E, None, "HANGUL LETTER HIEUH", 0x31, "Compat_Jamo"),
    c(0x314F, None, "HANGUL LETTER A", 0x31, "Compat_Jamo"),
    c(0x3150, None, "HANGUL LETTER AE", 0x31, "Compat_Jamo"),
    c(0x3151, None, "HANGUL LETTER YA", 0x31, "Compat_Jamo"),
    c(0x3152, None, "HANGUL LETTER YAE", 0x31, "Compat_Jamo"),
    c(0x3153, None, "HANGUL LETTER EO", 0x31, "Compat_Jamo"),
    c(0x3154, None, "HANGUL LETTER E", 0x31, "Compat_Jamo"),
    c(0x3155, None, "HANGUL LETTER YEO", 0x31, "Compat_Jamo"),
    c(0x3156, None, "HANGUL LETTER YE", 0x31, "Compat_Jamo"),
    c(0x3157, None, "HANGUL LETTER O", 0x31, "Compat_Jamo"),
    c(0x3158, None, "HANGUL LETTER WA", 0x31, "Compat_Jamo"),
    c(0x3159, None, "HANGUL LETTER WAE", 0x31, "Compat_Jamo"),
    c(0x315A, None, "HANGUL LETTER OE", 0x31, "Compat_Jamo"),
    c(0x315B, None, "HANGUL LETTER YO", 0x31, "Compat_Jamo"),
    c(0x315C, None, "HANGUL LETTER U", 0x31, "Compat_Jamo"),
    c(0x315D, None, "HANGUL LETTER WEO", 0x31, "Compat_Jamo"),
    c(0x315E, None, "HANGUL LETTER WE", 0x31, "Compat_Jamo"),
    c(0x315F, None, "HANGUL LETTER WI", 0x31, "Compat_Jamo"),
    c(0x3160, None, "HANGUL LETTER YU", 0x31, "Compat_Jamo"),
    c(0x3161, None, "HANGUL LETTER EU", 0x31, "Compat_Jamo"),
    c(0x3162, None, "HANGUL LETTER YI", 0x31, "Compat_Jamo"),
    c(0x3163, None, "HANGUL LETTER I", 0x31, "Compat_Jamo"),
    c(0x3164, None, "HANGUL FILLER", 0x31, "Compat_Jamo"),
    c(0x3165, None, "HANGUL LETTER SSANGNIEUN", 0x31, "Compat_Jamo"),
    c(0x3166, None, "HANGUL LETTER NIEUN-TIKEUT", 0x31, "Compat_Jamo"),
    c(0x3167, None, "HANGUL LETTER NIEUN-SIOS", 0x31, "Compat_Jamo"),
    c(0x3168, None, "HANGUL LETTER NIEUN-PANSIOS", 0x31, "Compat_Jamo"),
    c(0x3169, None, "HANGUL LETTER RIEUL-KIYEOK-SIOS", 0x31, "Compat_Jamo"),
    c(0x316A, None, "HANGUL LETTER RIEUL-TIKEUT", 0x31, "Compat_Jamo"),
    c(0x316B, None, "HANGUL LETTER RIEUL-PIEUP-SIOS", 0x31, "Compat_Jamo"),
    c(0x316C, None, "HANGUL LETTER RIEUL-PANSIOS", 0x31, "Compat_Jamo"),
    c(0x316D, None, "HANGUL LETTER RIEUL-YEORINHIEUH", 0x31, "Compat_Jamo"),
    c(0x316E, None, "HANGUL LETTER MIEUM-PIEUP", 0x31, "Compat_Jamo"),
    c(0x316F, None, "HANGUL LETTER MIEUM-SIOS", 0x31, "Compat_Jamo"),
    c(0x3170, None, "HANGUL LETTER MIEUM-PANSIOS", 0x31, "Compat_Jamo"),
    c(0x3171, None, "HANGUL LETTER KAPYEOUNMIEUM", 0x31, "Compat_Jamo"),
    c(0x3172, None, "HANGUL LETTER PIEUP-KIYEOK", 0x31, "Compat_Jamo"),
    c(0x3173, None, "HANGUL LETTER PIEUP-TIKEUT", 0x31, "Compat_Jamo"),
    c(0x3174, None, "HANGUL LETTER PIEUP-SIOS-KIYEOK", 0x31, "Compat_Jamo"),
    c(0x3175, None, "HANGUL LETTER PIEUP-SIOS-TIKEUT", 0x31, "Compat_Jamo"),
    c(0x3176, None, "HANGUL LETTER PIEUP-CIEUC", 0x31, "Compat_Jamo"),
    c(0x3177, None, "HANGUL LETTER PIEUP-THIEUTH", 0x31, "Compat_Jamo"),
    c(0x3178, None, "HANGUL LETTER KAPYEOUNPIEUP", 0x31, "Compat_Jamo"),
    c(0x3179, None, "HANGUL LETTER KAPYEOUNSSANGPIEUP", 0x31, "Compat_Jamo"),
    c(0x317A, None, "HANGUL LETTER SIOS-KIYEOK", 0x31, "Compat_Jamo"),
    c(0x317B, None, "HANGUL LETTER SIOS-NIEUN", 0x31, "Compat_Jamo"),
    c(0x317C, None, "HANGUL LETTER SIOS-TIKEUT", 0x31, "Compat_Jamo"),
    c(0x317D, None, "HANGUL LETTER SIOS-PIEUP", 0x31, "Compat_Jamo"),
    c(0x317E, None, "HANGUL LETTER SIOS-CIEUC", 0x31, "Compat_Jamo"),
    c(0x317F, None, "HANGUL LETTER PANSIOS", 0x31, "Compat_Jamo"),
    c(0x3180, None, "HANGUL LETTER SSANGIEUNG", 0x31, "Compat_Jamo"),
    c(0x3181, None, "HANGUL LETTER YESIEUNG", 0x31, "Compat_Jamo"),
    c(0x3182, None, "HANGUL LETTER YESIEUNG-SIOS", 0x31, "Compat_Jamo"),
    c(0x3183, None, "HANGUL LETTER YESIEUNG-PANSIOS", 0x31, "Compat_Jamo"),
    c(0x3184, None, "HANGUL LETTER KAPYEOUNPHIEUPH", 0x31, "Compat_Jamo"),
    c(0x3185, None, "HANGUL LETTER SSANGHIEUH", 0x31, "Compat_Jamo"),
    c(0x3186, None, "HANGUL LETTER YEORINHIEUH", 0x31, "Compat_Jamo"),
    c(0x3187, None, "HANGUL LETTER YO-YA", 0x31, "Compat_Jamo"),
    c(0x3188, None, "HANGUL LETTER YO-YAE", 0x31, "Compat_Jamo"),
    c(0x3189, None, "HANGUL LETTER YO-I", 0x31, "Compat_Jamo"),
    c(0x318A, None, "HANGUL LETTER YU-YEO", 0x31, "Compat_Jamo"),
    c(0x318B, None, "HANGUL LETTER YU-YE", 0x31, "Compat_Jamo"),
    c(0x318C, None, "HANGUL LETTER YU-I", 0x31, "Compat_Jamo"),
    c(0x318D, None, "HANGUL LETTER ARAEA", 0x31, "Compat_Jamo"),
    c(0x318E, None, "HANGUL LETTER ARAEAE", 0x31, "Compat_Jamo"),
    c(0x3190, None, "IDEOGRAPHIC ANNOTATION LINKING MARK", 0x00, "Kanbun"),
    c(0x3191, None, "IDEOGRAPHIC ANNOTATION REVERSE MARK", 0x00, "Kanbun"),
    c(0x3192, None, "IDEOGRAPHIC ANNOTATION ONE MARK", 0x00, "Kanbun"),
    c(0x3193, None, "IDEOGRAPHIC ANNOTATION TWO MARK", 0x00, "Kanbun"),
    c(0x3194, None, "IDEOGRAPHIC ANNOTATION THREE MARK", 0x00, "Kanbun"),
    c(0x3195, None, "IDEOGRAPHIC ANNOTATION FOUR MARK", 0x00, "Kanbun"),
    c(0x3196, None, "IDEOGRAPHIC ANNOTATION TOP MARK", 0x00, "Kanbun"),
    c(0x3197, None, "IDEOGRAPHIC ANNOTATION MIDDLE MARK", 0x00, "Kanbun"),
    c(0x3198, None, "IDEOGRAPHIC ANNOTATION BOTTOM MARK", 0x00, "Kanbun"),
    c(0x3199, None, "IDEOGRAPHIC ANNOTATION FIRST MARK", 0x00, "Kanbun"),
    c(0x319A, None, "IDEOGRAPHIC ANNOTATION SECOND MARK", 0x00, "Kanbun"),
    c(0x319B, None, "IDEOGRAPHIC ANNOTATION THIRD MARK", 0x00, "Kanbun"),
    c(0x319C, None, "IDEOGRAPHIC ANNOTATION FOURTH MARK", 0x00, "Kanbun"),
    c(0x319D, None, "IDEOGRAPHIC ANNOTATION HEAVEN MARK", 0x00, "Kanbun"),
    c(0x319E, None, "IDEOGRAPHIC ANNOTATION EARTH MARK", 0x00, "Kanbun"),
    c(0x319F, None, "IDEOGRAPHIC ANNOTATION MAN MARK", 0x00, "Kanbun"),
    c(0x31A0, None, "BOPOMOFO LETTER BU", 0x31, "Bopomofo_Ext"),
    c(0x31A1, None, "BOPOMOFO LETTER ZI", 0x31, "Bopomofo_Ext"),
    c(0x31A2, None, "BOPOMOFO LETTER JI", 0x31, "Bopomofo_Ext"),
    c(0x31A3, None, "BOPOMOFO LETTER GU", 0x31, "Bopomofo_Ext"),
    c(0x31A4, None, "BOPOMOFO LETTER EE", 0x31, "Bopomofo_Ext"),
    c(0x31A5, None, "BOPOMOFO LETTER ENN", 0x31, "Bopomofo_Ext"),
    c(0x31A6, None, "BOPOMOFO LETTER OO", 0x31, "Bopomofo_Ext"),
    c(0x31A7, None, "BOPOMOFO LETTER ONN", 0x31, "Bopomofo_Ext"),
    c(0x31A8, None, "BOPOMOFO LETTER IR", 0x31, "Bopomofo_Ext"),
    c(0x31A9, None, "BOPOMOFO LETTER ANN", 0x31, "Bopomofo_Ext"),
    c(0x31AA, None, "BOPOMOFO LETTER INN", 0x31, "Bopomofo_Ext"),
    c(0x31AB, None, "BOPOMOFO LETTER UNN", 0x31, "Bopomofo_Ext"),
    c(0x31AC, None, "BOPOMOFO LETTER IM", 0x31, "Bopomofo_Ext"),
    c(0x31AD, None, "BOPOMOFO LETTER NGG", 0x31, "Bopomofo_Ext"),
    c(0x31AE, None, "BOPOMOFO LETTER AINN", 0x31, "Bopomofo_Ext"),
    c(0x31AF, None, "BOPOMOFO LETTER AUNN", 0x31, "Bopomofo_Ext"),
    c(0x31B0, None, "BOPOMOFO LETTER AM", 0x31, "Bopomofo_Ext"),
    c(0x31B1, None, "BOPOMOFO LETTER OM", 0x31, "Bopomofo_Ext"),
    c(0x31B2, None, "BOPOMOFO LETTER ONG", 0x31, "Bopomofo_Ext"),
    c(0x31B3, None, "BOPOMOFO LETTER INNN", 0x31, "Bopomofo_Ext"),
    c(0x31B4, None, "BOPOMOFO FINAL LETTER P", 0x31, "Bopomofo_Ext"),
    c(0x31B5, None, "BOPOMOFO FINAL LETTER T", 0x31, "Bopomofo_Ext"),
    c(0x31B6, None, "BOPOMOFO FINAL LETTER K", 0x31, "Bopomofo_Ext"),
    c(0x31B7, None, "BOPOMOFO FINAL LETTER H", 0x31, "Bopomofo_Ext"),
    c(0x31B8, None, "BOPOMOFO LETTER GH", 0x31, "Bopomofo_Ext"),
    c(0x31B9, None, "BOPOMOFO LETTER LH", 0x31, "Bopomofo_Ext"),
    c(0x31BA, None, "BOPOMOFO LETTER ZY", 0x31, "Bopomofo_Ext"),
    c(0x31BB, None, "BOPOMOFO FINAL LETTER G", 0x31, "Bopomofo_Ext"),
    c(0x31BC, None, "BOPOMOFO LETTER GW", 0x31, "Bopomofo_Ext"),
    c(0x31BD, None, "BOPOMOFO LETTER KW", 0x31, "Bopomofo_Ext"),
    c(0x31BE, None, "BOPOMOFO LETTER OE", 0x31, "Bopomofo_Ext"),
    c(0x31BF, None, "BOPOMOFO LETTER AH", 0x31, "Bopomofo_Ext"),
    c(0x31C0, None, "CJK STROKE T", 0x00, "CJK_Strokes"),
    c(0x31C1, None, "CJK STROKE WG", 0x00, "CJK_Strokes"),
    c(0x31C2, None, "CJK STROKE XG", 0x00, "CJK_Strokes"),
    c(0x31C3, None, "CJK STROKE BXG", 0x00, "CJK_Strokes"),
    c(0x31C4, None, "CJK STROKE SW", 0x00, "CJK_Strokes"),
    c(0x31C5, None, "CJK STROKE HZZ", 0x00, "CJK_Strokes"),
    c(0x31C6, None, "CJK STROKE HZG", 0x00, "CJK_Strokes"),
    c(0x31C7, None, "CJK STROKE HP", 0x00, "CJK_Strokes"),
    c(0x31C8, None, "CJK STROKE HZWG", 0x00, "CJK_Strokes"),
    c(0x31C9, None, "CJK STROKE SZWG", 0x00, "CJK_Strokes"),
    c(0x31CA, None, "CJK STROKE HZT", 0x00, "CJK_Strokes"),
    c(0x31CB, None, "CJK STROKE HZZP", 0x00, "CJK_Strokes"),
    c(0x31CC, None, "CJK STROKE HPWG", 0x00, "CJK_Strokes"),
    c(0x31CD, None, "CJK STROKE HZW", 0x00, "CJK_Strokes"),
    c(0x31CE, None, "CJK STROKE HZZZ", 0x00, "CJK_Strokes"),
    c(0x31CF, None, "CJK STROKE N", 0x00, "CJK_Strokes"),
    c(0x31D0, None, "CJK STROKE H", 0x00, "CJK_Strokes"),
    c(0x31D1, None, "CJK STROKE S", 0x00, "CJK_Strokes"),
    c(0x31D2, None, "CJK STROKE P", 0x00, "CJK_Strokes"),
    c(0x31D3, None, "CJK STROKE SP", 0x00, "CJK_Strokes"),
    c(0x31D4, None, "CJK STROKE D", 0x00, "CJK_Strokes"),
    c(0x31D5, None, "CJK STROKE HZ", 0x00, "CJK_Strokes"),
    c(0x31D6, None, "CJK STROKE HG", 0x00, "CJK_Strokes"),
    c(0x31D7, None, "CJK STROKE SZ", 0x00, "CJK_Strokes"),
    c(0x31D8, None, "CJK STROKE SWZ", 0x00, "CJK_Strokes"),
    c(0x31D9, None, "CJK STROKE ST", 0x00, "CJK_Strokes"),
    c(0x31DA, None, "CJK STROKE SG", 0x00, "CJK_Strokes"),
    c(0x31DB, None, "CJK STROKE PD", 0x00, "CJK_Strokes"),
    c(0x31DC, None, "CJK STROKE PZ", 0x00, "CJK_Strokes"),
    c(0x31DD, None, "CJK STROKE TN", 0x00, "CJK_Strokes"),
    c(0x31DE, None, "CJK STROKE SZZ", 0x00, "CJK_Strokes"),
    c(0x31DF, None, "CJK STROKE SWG", 0x00, "CJK_Strokes"),
    c(0x31E0, None, "CJK STROKE HXWG", 0x00, "CJK_Strokes"),
    c(0x31E1, None, "CJK STROKE HZZZG", 0x00, "CJK_Strokes"),
    c(0x31E2, None, "CJK STROKE PG", 0x00, "CJK_Strokes"),
    c(0x31E3, None, "CJK STROKE Q", 0x00, "CJK_Strokes"),
    c(0x31F0, None, "KATAKANA LETTER SMALL KU", 0x31, "Katakana_Ext"),
    c(0x31F1, None, "KATAKANA LETTER SMALL SI", 0x31, "Katakana_Ext"),
    c(0x31F2, None, "KATAKANA LETTER SMALL SU", 0x31, "Katakana_Ext"),
    c(0x31F3, None, "KATAKANA LETTER SMALL TO", 0x31, "Katakana_Ext"),
    c(0x31F4, None, "KATAKANA LETTER SMALL NU", 0x31, "Katakana_Ext"),
    c(0x31F5, None, "KATAKANA LETTER SMALL HA", 0x31, "Katakana_Ext"),
    c(0x31F6, None, "KATAKANA LETTER SMALL HI", 0x31, "Katakana_Ext"),
    c(0x31F7, None, "KATAKANA LETTER SMALL HU", 0x31, "Katakana_Ext"),
    c(0x31F8, None, "KATAKANA LETTER SMALL HE", 0x31, "Katakana_Ext"),
    c(0x31F9, None, "KATAKANA LETTER SMALL HO", 0x31, "Katakana_Ext"),
    c(0x31FA, None, "KATAKANA LETTER SMALL MU", 0x31, "Katakana_Ext"),
    c(0x31FB, None, "KATAKANA LETTER SMALL RA", 0x31, "Katakana_Ext"),
    c(0x31FC, None, "KATAKANA LETTER SMALL RI", 0x31, "Katakana_Ext"),
    c(0x31FD, None, "KATAKANA LETTER SMALL RU", 0x31, "Katakana_Ext"),
    c(0x31FE, None, "KATAKANA LETTER SMALL RE", 0x31, "Katakana_Ext"),
    c(0x31FF, None, "KATAKANA LETTER SMALL RO", 0x31, "Katakana_Ext"),
    c(0x3200, None, "PARENTHESIZED HANGUL KIYEOK", 0x00, "Enclosed_CJK"),
    c(0x3201, None, "PARENTHESIZED HANGUL NIEUN", 0x00, "Enclosed_CJK"),
    c(0x3202, None, "PARENTHESIZED HANGUL TIKEUT", 0x00, "Enclosed_CJK"),
    c(0x3203, None, "PARENTHESIZED HANGUL RIEUL", 0x00, "Enclosed_CJK"),
    c(0x3204, None, "PARENTHESIZED HANGUL MIEUM", 0x00, "Enclosed_CJK"),
    c(0x3205, None, "PARENTHESIZED HANGUL PIEUP", 0x00, "Enclosed_CJK"),
    c(0x3206, None, "PARENTHESIZED HANGUL SIOS", 0x00, "Enclosed_CJK"),
    c(0x3207, None, "PARENTHESIZED HANGUL IEUNG", 0x00, "Enclosed_CJK"),
    c(0x3208, None, "PARENTHESIZED HANGUL CIEUC", 0x00, "Enclosed_CJK"),
    c(0x3209, None, "PARENTHESIZED HANGUL CHIEUCH", 0x00, "Enclosed_CJK"),
    c(0x320A, None, "PARENTHESIZED HANGUL KHIEUKH", 0x00, "Enclosed_CJK"),
    c(0x320B, None, "PARENTHESIZED HANGUL THIEUTH", 0x00, "Enclosed_CJK"),
    c(0x320C, None, "PARENTHESIZED HANGUL PHIEUPH", 0x00, "Enclosed_CJK"),
    c(0x320D, None, "PARENTHESIZED HANGUL HIEUH", 0x00, "Enclosed_CJK"),
    c(0x320E, None, "PARENTHESIZED HANGUL KIYEOK A", 0x00, "Enclosed_CJK"),
    c(0x320F, None, "PARENTHESIZED HANGUL NIEUN A", 0x00, "Enclosed_CJK"),
    c(0x3210, None, "PARENTHESIZED HANGUL TIKEUT A", 0x00, "Enclosed_CJK"),
    c(0x3211, None, "PARENTHESIZED HANGUL RIEUL A", 0x00, "Enclosed_CJK"),
    c(0x3212, None, "PARENTHESIZED HANGUL MIEUM A", 0x00, "Enclosed_CJK"),
    c(0x3213, None, "PARENTHESIZED HANGUL PIEUP A", 0x00, "Enclosed_CJK"),
    c(0x3214, None, "PARENTHESIZED HANGUL SIOS A", 0x00, "Enclosed_CJK"),
    c(0x3215, None, "PARENTHESIZED HANGUL IEUNG A", 0x00, "Enclosed_CJK"),
    c(0x3216, None, "PARENTHESIZED HANGUL CIEUC A", 0x00, "Enclosed_CJK"),
    c(0x3217, None, "PARENTHESIZED HANGUL CHIEUCH A", 0x00, "Enclosed_CJK"),
    c(0x3218, None, "PARENTHESIZED HANGUL KHIEUKH A", 0x00, "Enclosed_CJK"),
    c(0x3219, None, "PARENTHESIZED HANGUL THIEUTH A", 0x00, "Enclosed_CJK"),
    c(0x321A, None, "PARENTHESIZED HANGUL PHIEUPH A", 0x00, "Enclosed_CJK"),
    c(0x321B, None, "PARENTHESIZED HANGUL HIEUH A", 0x00, "Enclosed_CJK"),
    c(0x321C, None, "PARENTHESIZED HANGUL CIEUC U", 0x00, "Enclosed_CJK"),
    c(0x321D, None, "PARENTHESIZED KOREAN CHARACTER OJEON", 0x00, "Enclosed_CJK"),
    c(0x321E, None, "PARENTHESIZED KOREAN CHARACTER O HU", 0x00, "Enclosed_CJK"),
    c(0x3220, None, "PARENTHESIZED IDEOGRAPH ONE", 0x00, "Enclosed_CJK"),
    c(0x3221, None, "PARENTHESIZED IDEOGRAPH TWO", 0x00, "Enclosed_CJK"),
    c(0x3222, None, "PARENTHESIZED IDEOGRAPH THREE", 0x00, "Enclosed_CJK"),
    c(0x3223, None, "PARENTHESIZED IDEOGRAPH FOUR", 0x00, "Enclosed_CJK"),
    c(0x3224, None, "PARENTHESIZED IDEOGRAPH FIVE", 0x00, "Enclosed_CJK"),
    c(0x3225, None, "PARENTHESIZED IDEOGRAPH SIX", 0x00, "Enclosed_CJK"),
    c(0x3226, None, "PARENTHESIZED IDEOGRAPH SEVEN", 0x00, "Enclosed_CJK"),
    c(0x3227, None, "PARENTHESIZED IDEOGRAPH EIGHT", 0x00, "Enclosed_CJK"),
    c(0x3228, None, "PARENTHESIZED IDEOGRAPH NINE", 0x00, "Enclosed_CJK"),
    c(0x3229, None, "PARENTHESIZED IDEOGRAPH TEN", 0x00, "Enclosed_CJK"),
    c(0x322A, None, "PARENTHESIZED IDEOGRAPH MOON", 0x00, "Enclosed_CJK"),
    c(0x322B, None, "PARENTHESIZED IDEOGRAPH FIRE", 0x00, "Enclosed_CJK"),
    c(0x322C, None, "PARENTHESIZED IDEOGRAPH WATER", 0x00, "Enclosed_CJK"),
    c(0x322D, None, "PARENTHESIZED IDEOGRAPH WOOD", 0x00, "Enclosed_CJK"),
    c(0x322E, None, "PARENTHESIZED IDEOGRAPH METAL", 0x00, "Enclosed_CJK"),
    c(0x322F, None, "PARENTHESIZED IDEOGRAPH EARTH", 0x00, "Enclosed_CJK"),
    c(0x3230, None, "PARENTHESIZED IDEOGRAPH SUN", 0x00, "Enclosed_CJK"),
    c(0x3231, None, "PARENTHESIZED IDEOGRAPH STOCK", 0x00, "Enclosed_CJK"),
    c(0x3232, None, "PARENTHESIZED IDEOGRAPH HAVE", 0x00, "Enclosed_CJK"),
    c(0x3233, None, "PARENTHESIZED IDEOGRAPH SOCIETY", 0x00, "Enclosed_CJK"),
    c(0x3234, None, "PARENTHESIZED IDEOGRAPH NAME", 0x00, "Enclosed_CJK"),
    c(0x3235, None, "PARENTHESIZED IDEOGRAPH SPECIAL", 0x00, "Enclosed_CJK"),
    c(0x3236, None, "PARENTHESIZED IDEOGRAPH FINANCIAL", 0x00, "Enclosed_CJK"),
    c(0x3237, None, "PARENTHESIZED IDEOGRAPH CONGRATULATION", 0x00, "Enclosed_CJK"),
    c(0x3238, None, "PARENTHESIZED IDEOGRAPH LABOR", 0x00, "Enclosed_CJK"),
    c(0x3239, None, "PARENTHESIZED IDEOGRAPH REPRESENT", 0x00, "Enclosed_CJK"),
    c(0x323A, None, "PARENTHESIZED IDEOGRAPH CALL", 0x00, "Enclosed_CJK"),
    c(0x323B, None, "PARENTHESIZED IDEOGRAPH STUDY", 0x00, "Enclosed_CJK"),
    c(0x323C, None, "PARENTHESIZED IDEOGRAPH SUPERVISE", 0x00, "Enclosed_CJK"),
    c(0x323D, None, "PARENTHESIZED IDEOGRAPH ENTERPRISE", 0x00, "Enclosed_CJK"),
    c(0x323E, None, "PARENTHESIZED IDEOGRAPH RESOURCE", 0x00, "Enclosed_CJK"),
    c(0x323F, None, "PARENTHESIZED IDEOGRAPH ALLIANCE", 0x00, "Enclosed_CJK"),
    c(0x3240, None, "PARENTHESIZED IDEOGRAPH FESTIVAL", 0x00, "Enclosed_CJK"),
    c(0x3241, None, "PARENTHESIZED IDEOGRAPH REST", 0x00, "Enclosed_CJK"),
    c(0x3242, None, "PARENTHESIZED IDEOGRAPH SELF", 0x00, "Enclosed_CJK"),
    c(0x3243, None, "PARENTHESIZED IDEOGRAPH REACH", 0x00, "Enclosed_CJK"),
    c(0x3244, None, "CIRCLED IDEOGRAPH QUESTION", 0x00, "Enclosed_CJK"),
    c(0x3245, None, "CIRCLED IDEOGRAPH KINDERGARTEN", 0x00, "Enclosed_CJK"),
    c(0x3246, None, "CIRCLED IDEOGRAPH SCHOOL", 0x00, "Enclosed_CJK"),
    c(0x3247, None, "CIRCLED IDEOGRAPH KOTO", 0x00, "Enclosed_CJK"),
    c(0x3248, None, "CIRCLED NUMBER TEN ON BLACK SQUARE", 0x00, "Enclosed_CJK"),
    c(0x3249, None, "CIRCLED NUMBER TWENTY ON BLACK SQUARE", 0x00, "Enclosed_CJK"),
    c(0x324A, None, "CIRCLED NUMBER THIRTY ON BLACK SQUARE", 0x00, "Enclosed_CJK"),
    c(0x324B, None, "CIRCLED NUMBER FORTY ON BLACK SQUARE", 0x00, "Enclosed_CJK"),
    c(0x324C, None, "CIRCLED NUMBER FIFTY ON BLACK SQUARE", 0x00, "Enclosed_CJK"),
    c(0x324D, None, "CIRCLED NUMBER SIXTY ON BLACK SQUARE", 0x00, "Enclosed_CJK"),
    c(0x324E, None, "CIRCLED NUMBER SEVENTY ON BLACK SQUARE", 0x00, "Enclosed_CJK"),
    c(0x324F, None, "CIRCLED NUMBER EIGHTY ON BLACK SQUARE", 0x00, "Enclosed_CJK"),
    c(0x3250, None, "PARTNERSHIP SIGN", 0x00, "Enclosed_CJK"),
    c(0x3251, None, "CIRCLED NUMBER TWENTY ONE", 0x00, "Enclosed_CJK"),
    c(0x3252, None, "CIRCLED NUMBER TWENTY TWO", 0x00, "Enclosed_CJK"),
    c(0x3253, None, "CIRCLED NUMBER TWENTY THREE", 0x00, "Enclosed_CJK"),
    c(0x3254, None, "CIRCLED NUMBER TWENTY FOUR", 0x00, "Enclosed_CJK"),
    c(0x3255, None, "CIRCLED NUMBER TWENTY FIVE", 0x00, "Enclosed_CJK"),
    c(0x3256, None, "CIRCLED NUMBER TWENTY SIX", 0x00, "Enclosed_CJK"),
    c(0x3257, None, "CIRCLED NUMBER TWENTY SEVEN", 0x00, "Enclosed_CJK"),
    c(0x3258, None, "CIRCLED NUMBER TWENTY EIGHT", 0x00, "Enclosed_CJK"),
    c(0x3259, None, "CIRCLED NUMBER TWENTY NINE", 0x00, "Enclosed_CJK"),
    c(0x325A, None, "CIRCLED NUMBER THIRTY", 0x00, "Enclosed_CJK"),
    c(0x325B, None, "CIRCLED NUMBER THIRTY ONE", 0x00, "Enclosed_CJK"),
    c(0x325C, None, "CIRCLED NUMBER THIRTY TWO", 0x00, "Enclosed_CJK"),
    c(0x325D, None, "CIRCLED NUMBER THIRTY THREE", 0x00, "Enclosed_CJK"),
    c(0x325E, None, "CIRCLED NUMBER THIRTY FOUR", 0x00, "Enclosed_CJK"),
    c(0x325F, None, "CIRCLED NUMBER THIRTY FIVE", 0x00, "Enclosed_CJK"),
    c(0x3260, None, "CIRCLED HANGUL KIYEOK", 0x00, "Enclosed_CJK"),
    c(0x3261, None, "CIRCLED HANGUL NIEUN", 0x00, "Enclosed_CJK"),
    c(0x3262, None, "CIRCLED HANGUL TIKEUT", 0x00, "Enclosed_CJK"),
    c(0x3263, None, "CIRCLED HANGUL RIEUL", 0x00, "Enclosed_CJK"),
    c(0x3264, None, "CIRCLED HANGUL MIEUM", 0x00, "Enclosed_CJK"),
    c(0x3265, None, "CIRCLED HANGUL PIEUP", 0x00, "Enclosed_CJK"),
    c(0x3266, None, "CIRCLED HANGUL SIOS", 0x00, "Enclosed_CJK"),
    c(0x3267, None, "CIRCLED HANGUL IEUNG", 0x00, "Enclosed_CJK"),
    c(0x3268, None, "CIRCLED HANGUL CIEUC", 0x00, "Enclosed_CJK"),
    c(0x3269, None, "CIRCLED HANGUL CHIEUCH", 0x00, "Enclosed_CJK"),
    c(0x326A, None, "CIRCLED HANGUL KHIEUKH", 0x00, "Enclosed_CJK"),
    c(0x326B, None, "CIRCLED HANGUL THIEUTH", 0x00, "Enclosed_CJK"),
    c(0x326C, None, "CIRCLED HANGUL PHIEUPH", 0x00, "Enclosed_CJK"),
    c(0x326D, None, "CIRCLED HANGUL HIEUH", 0x00, "Enclosed_CJK"),
    c(0x326E, None, "CIRCLED HANGUL KIYEOK A", 0x00, "Enclosed_CJK"),
    c(0x326F, None, "CIRCLED HANGUL NIEUN A", 0x00, "Enclosed_CJK"),
    c(0x3270, None, "CIRCLED HANGUL TIKEUT A", 0x00, "Enclosed_CJK"),
    c(0x3271, None, "CIRCLED HANGUL RIEUL A", 0x00, "Enclosed_CJK"),
    c(0x3272, None, "CIRCLED HANGUL MIEUM A", 0x00, "Enclosed_CJK"),
    c(0x3273, None, "CIRCLED HANGUL PIEUP A", 0x00, "Enclosed_CJK"),
    c(0x3274, None, "CIRCLED HANGUL SIOS A", 0x00, "Enclosed_CJK"),
    c(0x3275, None, "CIRCLED HANGUL IEUNG A", 0x00, "Enclosed_CJK"),
    c(0x3276, None, "CIRCLED HANGUL CIEUC A", 0x00, "Enclosed_CJK"),
    c(0x3277, None, "CIRCLED HANGUL CHIEUCH A", 0x00, "Enclosed_CJK"),
    c(0x3278, None, "CIRCLED HANGUL KHIEUKH A", 0x00, "Enclosed_CJK"),
    c(0x3279, None, "CIRCLED HANGUL THIEUTH A", 0x00, "Enclosed_CJK"),
    c(0x327A, None, "CIRCLED HANGUL PHIEUPH A", 0x00, "Enclosed_CJK"),
    c(0x327B, None, "CIRCLED HANGUL HIEUH A", 0x00, "Enclosed_CJK"),
    c(0x327C, None, "CIRCLED KOREAN CHARACTER CHAMKO", 0x00, "Enclosed_CJK"),
    c(0x327D, None, "CIRCLED KOREAN CHARACTER JUEUI", 0x00, "Enclosed_CJK"),
    c(0x327E, None, "CIRCLED HANGUL IEUNG U", 0x00, "Enclosed_CJK"),
    c(0x327F, None, "KOREAN STANDARD SYMBOL", 0x00, "Enclosed_CJK"),
    c(0x3280, None, "CIRCLED IDEOGRAPH ONE", 0x00, "Enclosed_CJK"),
    c(0x3281, None, "CIRCLED IDEOGRAPH TWO", 0x00, "Enclosed_CJK"),
    c(0x3282, None, "CIRCLED IDEOGRAPH THREE", 0x00, "Enclosed_CJK"),
    c(0x3283, None, "CIRCLED IDEOGRAPH FOUR", 0x00, "Enclosed_CJK"),
    c(0x3284, None, "CIRCLED IDEOGRAPH FIVE", 0x00, "Enclosed_CJK"),
    c(0x3285, None, "CIRCLED IDEOGRAPH SIX", 0x00, "Enclosed_CJK"),
    c(0x3286, None, "CIRCLED IDEOGRAPH SEVEN", 0x00, "Enclosed_CJK"),
    c(0x3287, None, "CIRCLED IDEOGRAPH EIGHT", 0x00, "Enclosed_CJK"),
    c(0x3288, None, "CIRCLED IDEOGRAPH NINE", 0x00, "Enclosed_CJK"),
    c(0x3289, None, "CIRCLED IDEOGRAPH TEN", 0x00, "Enclosed_CJK"),
    c(0x328A, None, "CIRCLED IDEOGRAPH MOON", 0x00, "Enclosed_CJK"),
    c(0x328B, None, "CIRCLED IDEOGRAPH FIRE", 0x00, "Enclosed_CJK"),
    c(0x328C, None, "CIRCLED IDEOGRAPH WATER", 0x00, "Enclosed_CJK"),
    c(0x328D, None, "CIRCLED IDEOGRAPH WOOD", 0x00, "Enclosed_CJK"),
    c(0x328E, None, "CIRCLED IDEOGRAPH METAL", 0x00, "Enclosed_CJK"),
    c(0x328F, None, "CIRCLED IDEOGRAPH EARTH", 0x00, "Enclosed_CJK"),
    c(0x3290, None, "CIRCLED IDEOGRAPH SUN", 0x00, "Enclosed_CJK"),
    c(0x3291, None, "CIRCLED IDEOGRAPH STOCK", 0x00, "Enclosed_CJK"),
    c(0x3292, None, "CIRCLED IDEOGRAPH HAVE", 0x00, "Enclosed_CJK"),
    c(0x3293, None, "CIRCLED IDEOGRAPH SOCIETY", 0x00, "Enclosed_CJK"),
    c(0x3294, None, "CIRCLED IDEOGRAPH NAME", 0x00, "Enclosed_CJK"),
    c(0x3295, None, "CIRCLED IDEOGRAPH SPECIAL", 0x00, "Enclosed_CJK"),
    c(0x3296, None, "CIRCLED IDEOGRAPH FINANCIAL", 0x00, "Enclosed_CJK"),
    c(0x3297, None, "CIRCLED IDEOGRAPH CONGRATULATION", 0x00, "Enclosed_CJK"),
    c(0x3298, None, "CIRCLED IDEOGRAPH LABOR", 0x00, "Enclosed_CJK"),
    c(0x3299, None, "CIRCLED IDEOGRAPH SECRET", 0x00, "Enclosed_CJK"),
    c(0x329A, None, "CIRCLED IDEOGRAPH MALE", 0x00, "Enclosed_CJK"),
    c(0x329B, None, "CIRCLED IDEOGRAPH FEMALE", 0x00, "Enclosed_CJK"),
    c(0x329C, None, "CIRCLED IDEOGRAPH SUITABLE", 0x00, "Enclosed_CJK"),
    c(0x329D, None, "CIRCLED IDEOGRAPH EXCELLENT", 0x00, "Enclosed_CJK"),
    c(0x329E, None, "CIRCLED IDEOGRAPH PRINT", 0x00, "Enclosed_CJK"),
    c(0x329F, None, "CIRCLED IDEOGRAPH ATTENTION", 0x00, "Enclosed_CJK"),
    c(0x32A0, None, "CIRCLED IDEOGRAPH ITEM", 0x00, "Enclosed_CJK"),
    c(0x32A1, None, "CIRCLED IDEOGRAPH REST", 0x00, "Enclosed_CJK"),
    c(0x32A2, None, "CIRCLED IDEOGRAPH COPY", 0x00, "Enclosed_CJK"),
    c(0x32A3, None, "CIRCLED IDEOGRAPH CORRECT", 0x00, "Enclosed_CJK"),
    c(0x32A4, None, "CIRCLED IDEOGRAPH HIGH", 0x00, "Enclosed_CJK"),
    c(0x32A5, None, "CIRCLED IDEOGRAPH CENTRE", 0x00, "Enclosed_CJK"),
    c(0x32A6, None, "CIRCLED IDEOGRAPH LOW", 0x00, "Enclosed_CJK"),
    c(0x32A7, None, "CIRCLED IDEOGRAPH LEFT", 0x00, "Enclosed_CJK"),
    c(0x32A8, None, "CIRCLED IDEOGRAPH RIGHT", 0x00, "Enclosed_CJK"),
    c(0x32A9, None, "CIRCLED IDEOGRAPH MEDICINE", 0x00, "Enclosed_CJK"),
    c(0x32AA, None, "CIRCLED IDEOGRAPH RELIGION", 0x00, "Enclosed_CJK"),
    c(0x32AB, None, "CIRCLED IDEOGRAPH STUDY", 0x00, "Enclosed_CJK"),
    c(0x32AC, None, "CIRCLED IDEOGRAPH SUPERVISE", 0x00, "Enclosed_CJK"),
    c(0x32AD, None, "CIRCLED IDEOGRAPH ENTERPRISE", 0x00, "Enclosed_CJK"),
    c(0x32AE, None, "CIRCLED IDEOGRAPH RESOURCE", 0x00, "Enclosed_CJK"),
    c(0x32AF, None, "CIRCLED IDEOGRAPH ALLIANCE", 0x00, "Enclosed_CJK"),
    c(0x32B0, None, "CIRCLED IDEOGRAPH NIGHT", 0x00, "Enclosed_CJK"),
    c(0x32B1, None, "CIRCLED NUMBER THIRTY SIX", 0x00, "Enclosed_CJK"),
    c(0x32B2, None, "CIRCLED NUMBER THIRTY SEVEN", 0x00, "Enclosed_CJK"),
    c(0x32B3, None, "CIRCLED NUMBER THIRTY EIGHT", 0x00, "Enclosed_CJK"),
    c(0x32B4, None, "CIRCLED NUMBER THIRTY NINE", 0x00, "Enclosed_CJK"),
    c(0x32B5, None, "CIRCLED NUMBER FORTY", 0x00, "Enclosed_CJK"),
    c(0x32B6, None, "CIRCLED NUMBER FORTY ONE", 0x00, "Enclosed_CJK"),
    c(0x32B7, None, "CIRCLED NUMBER FORTY TWO", 0x00, "Enclosed_CJK"),
    c(0x32B8, None, "CIRCLED NUMBER FORTY THREE", 0x00, "Enclosed_CJK"),
    c(0x32B9, None, "CIRCLED NUMBER FORTY FOUR", 0x00, "Enclosed_CJK"),
    c(0x32BA, None, "CIRCLED NUMBER FORTY FIVE", 0x00, "Enclosed_CJK"),
    c(0x32BB, None, "CIRCLED NUMBER FORTY SIX", 0x00, "Enclosed_CJK"),
    c(0x32BC, None, "CIRCLED NUMBER FORTY SEVEN", 0x00, "Enclosed_CJK"),
    c(0x32BD, None, "CIRCLED NUMBER FORTY EIGHT", 0x00, "Enclosed_CJK"),
    c(0x32BE, None, "CIRCLED NUMBER FORTY NINE", 0x00, "Enclosed_CJK"),
    c(0x32BF, None, "CIRCLED NUMBER FIFTY", 0x00, "Enclosed_CJK"),
    c(0x32C0, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR JANUARY", 0x00, "Enclosed_CJK"),
    c(0x32C1, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR FEBRUARY", 0x00, "Enclosed_CJK"),
    c(0x32C2, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR MARCH", 0x00, "Enclosed_CJK"),
    c(0x32C3, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR APRIL", 0x00, "Enclosed_CJK"),
    c(0x32C4, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR MAY", 0x00, "Enclosed_CJK"),
    c(0x32C5, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR JUNE", 0x00, "Enclosed_CJK"),
    c(0x32C6, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR JULY", 0x00, "Enclosed_CJK"),
    c(0x32C7, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR AUGUST", 0x00, "Enclosed_CJK"),
    c(0x32C8, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR SEPTEMBER", 0x00, "Enclosed_CJK"),
    c(0x32C9, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR OCTOBER", 0x00, "Enclosed_CJK"),
    c(0x32CA, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR NOVEMBER", 0x00, "Enclosed_CJK"),
    c(0x32CB, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DECEMBER", 0x00, "Enclosed_CJK"),
    c(0x32CC, None, "SQUARE HG", 0x00, "Enclosed_CJK"),
    c(0x32CD, None, "SQUARE ERG", 0x00, "Enclosed_CJK"),
    c(0x32CE, None, "SQUARE EV", 0x00, "Enclosed_CJK"),
    c(0x32CF, None, "LIMITED LIABILITY SIGN", 0x00, "Enclosed_CJK"),
    c(0x32D0, None, "CIRCLED KATAKANA A", 0x00, "Enclosed_CJK"),
    c(0x32D1, None, "CIRCLED KATAKANA I", 0x00, "Enclosed_CJK"),
    c(0x32D2, None, "CIRCLED KATAKANA U", 0x00, "Enclosed_CJK"),
    c(0x32D3, None, "CIRCLED KATAKANA E", 0x00, "Enclosed_CJK"),
    c(0x32D4, None, "CIRCLED KATAKANA O", 0x00, "Enclosed_CJK"),
    c(0x32D5, None, "CIRCLED KATAKANA KA", 0x00, "Enclosed_CJK"),
    c(0x32D6, None, "CIRCLED KATAKANA KI", 0x00, "Enclosed_CJK"),
    c(0x32D7, None, "CIRCLED KATAKANA KU", 0x00, "Enclosed_CJK"),
    c(0x32D8, None, "CIRCLED KATAKANA KE", 0x00, "Enclosed_CJK"),
    c(0x32D9, None, "CIRCLED KATAKANA KO", 0x00, "Enclosed_CJK"),
    c(0x32DA, None, "CIRCLED KATAKANA SA", 0x00, "Enclosed_CJK"),
    c(0x32DB, None, "CIRCLED KATAKANA SI", 0x00, "Enclosed_CJK"),
    c(0x32DC, None, "CIRCLED KATAKANA SU", 0x00, "Enclosed_CJK"),
    c(0x32DD, None, "CIRCLED KATAKANA SE", 0x00, "Enclosed_CJK"),
    c(0x32DE, None, "CIRCLED KATAKANA SO", 0x00, "Enclosed_CJK"),
    c(0x32DF, None, "CIRCLED KATAKANA TA", 0x00, "Enclosed_CJK"),
    c(0x32E0, None, "CIRCLED KATAKANA TI", 0x00, "Enclosed_CJK"),
    c(0x32E1, None, "CIRCLED KATAKANA TU", 0x00, "Enclosed_CJK"),
    c(0x32E2, None, "CIRCLED KATAKANA TE", 0x00, "Enclosed_CJK"),
    c(0x32E3, None, "CIRCLED KATAKANA TO", 0x00, "Enclosed_CJK"),
    c(0x32E4, None, "CIRCLED KATAKANA NA", 0x00, "Enclosed_CJK"),
    c(0x32E5, None, "CIRCLED KATAKANA NI", 0x00, "Enclosed_CJK"),
    c(0x32E6, None, "CIRCLED KATAKANA NU", 0x00, "Enclosed_CJK"),
    c(0x32E7, None, "CIRCLED KATAKANA NE", 0x00, "Enclosed_CJK"),
    c(0x32E8, None, "CIRCLED KATAKANA NO", 0x00, "Enclosed_CJK"),
    c(0x32E9, None, "CIRCLED KATAKANA HA", 0x00, "Enclosed_CJK"),
    c(0x32EA, None, "CIRCLED KATAKANA HI", 0x00, "Enclosed_CJK"),
    c(0x32EB, None, "CIRCLED KATAKANA HU", 0x00, "Enclosed_CJK"),
    c(0x32EC, None, "CIRCLED KATAKANA HE", 0x00, "Enclosed_CJK"),
    c(0x32ED, None, "CIRCLED KATAKANA HO", 0x00, "Enclosed_CJK"),
    c(0x32EE, None, "CIRCLED KATAKANA MA", 0x00, "Enclosed_CJK"),
    c(0x32EF, None, "CIRCLED KATAKANA MI", 0x00, "Enclosed_CJK"),
    c(0x32F0, None, "CIRCLED KATAKANA MU", 0x00, "Enclosed_CJK"),
    c(0x32F1, None, "CIRCLED KATAKANA ME", 0x00, "Enclosed_CJK"),
    c(0x32F2, None, "CIRCLED KATAKANA MO", 0x00, "Enclosed_CJK"),
    c(0x32F3, None, "CIRCLED KATAKANA YA", 0x00, "Enclosed_CJK"),
    c(0x32F4, None, "CIRCLED KATAKANA YU", 0x00, "Enclosed_CJK"),
    c(0x32F5, None, "CIRCLED KATAKANA YO", 0x00, "Enclosed_CJK"),
    c(0x32F6, None, "CIRCLED KATAKANA RA", 0x00, "Enclosed_CJK"),
    c(0x32F7, None, "CIRCLED KATAKANA RI", 0x00, "Enclosed_CJK"),
    c(0x32F8, None, "CIRCLED KATAKANA RU", 0x00, "Enclosed_CJK"),
    c(0x32F9, None, "CIRCLED KATAKANA RE", 0x00, "Enclosed_CJK"),
    c(0x32FA, None, "CIRCLED KATAKANA RO", 0x00, "Enclosed_CJK"),
    c(0x32FB, None, "CIRCLED KATAKANA WA", 0x00, "Enclosed_CJK"),
    c(0x32FC, None, "CIRCLED KATAKANA WI", 0x00, "Enclosed_CJK"),
    c(0x32FD, None, "CIRCLED KATAKANA WE", 0x00, "Enclosed_CJK"),
    c(0x32FE, None, "CIRCLED KATAKANA WO", 0x00, "Enclosed_CJK"),
    c(0x32FF, None, "SQUARE ERA NAME REIWA", 0x00, "Enclosed_CJK"),
    c(0x3300, None, "SQUARE APAATO", 0x00, "CJK_Compat"),
    c(0x3301, None, "SQUARE ARUHUA", 0x00, "CJK_Compat"),
    c(0x3302, None, "SQUARE ANPEA", 0x00, "CJK_Compat"),
    c(0x3303, None, "SQUARE AARU", 0x00, "CJK_Compat"),
    c(0x3304, None, "SQUARE ININGU", 0x00, "CJK_Compat"),
    c(0x3305, None, "SQUARE INTI", 0x00, "CJK_Compat"),
    c(0x3306, None, "SQUARE UON", 0x00, "CJK_Compat"),
    c(0x3307, None, "SQUARE ESUKUUDO", 0x00, "CJK_Compat"),
    c(0x3308, None, "SQUARE EEKAA", 0x00, "CJK_Compat"),
    c(0x3309, None, "SQUARE ONSU", 0x00, "CJK_Compat"),
    c(0x330A, None, "SQUARE OOMU", 0x00, "CJK_Compat"),
    c(0x330B, None, "SQUARE KAIRI", 0x00, "CJK_Compat"),
    c(0x330C, None, "SQUARE KARATTO", 0x00, "CJK_Compat"),
    c(0x330D, None, "SQUARE KARORII", 0x00, "CJK_Compat"),
    c(0x330E, None, "SQUARE GARON", 0x00, "CJK_Compat"),
    c(0x330F, None, "SQUARE GANMA", 0x00, "CJK_Compat"),
    c(0x3310, None, "SQUARE GIGA", 0x00, "CJK_Compat"),
    c(0x3311, None, "SQUARE GINII", 0x00, "CJK_Compat"),
    c(0x3312, None, "SQUARE KYURII", 0x00, "CJK_Compat"),
    c(0x3313, None, "SQUARE GIRUDAA", 0x00, "CJK_Compat"),
    c(0x3314, None, "SQUARE KIRO", 0x00, "CJK_Compat"),
    c(0x3315, None, "SQUARE KIROGURAMU", 0x00, "CJK_Compat"),
    c(0x3316, None, "SQUARE KIROMEETORU", 0x00, "CJK_Compat"),
    c(0x3317, None, "SQUARE KIROWATTO", 0x00, "CJK_Compat"),
    c(0x3318, None, "SQUARE GURAMU", 0x00, "CJK_Compat"),
    c(0x3319, None, "SQUARE GURAMUTON", 0x00, "CJK_Compat"),
    c(0x331A, None, "SQUARE KURUZEIRO", 0x00, "CJK_Compat"),
    c(0x331B, None, "SQUARE KUROONE", 0x00, "CJK_Compat"),
    c(0x331C, None, "SQUARE KEESU", 0x00, "CJK_Compat"),
    c(0x331D, None, "SQUARE KORUNA", 0x00, "CJK_Compat"),
    c(0x331E, None, "SQUARE KOOPO", 0x00, "CJK_Compat"),
    c(0x331F, None, "SQUARE SAIKURU", 0x00, "CJK_Compat"),
    c(0x3320, None, "SQUARE SANTIIMU", 0x00, "CJK_Compat"),
    c(0x3321, None, "SQUARE SIRINGU", 0x00, "CJK_Compat"),
    c(0x3322, None, "SQUARE SENTI", 0x00, "CJK_Compat"),
    c(0x3323, None, "SQUARE SENTO", 0x00, "CJK_Compat"),
    c(0x3324, None, "SQUARE DAASU", 0x00, "CJK_Compat"),
    c(0x3325, None, "SQUARE DESI", 0x00, "CJK_Compat"),
    c(0x3326, None, "SQUARE DORU", 0x00, "CJK_Compat"),
    c(0x3327, None, "SQUARE TON", 0x00, "CJK_Compat"),
    c(0x3328, None, "SQUARE NANO", 0x00, "CJK_Compat"),
    c(0x3329, None, "SQUARE NOTTO", 0x00, "CJK_Compat"),
    c(0x332A, None, "SQUARE HAITU", 0x00, "CJK_Compat"),
    c(0x332B, None, "SQUARE PAASENTO", 0x00, "CJK_Compat"),
    c(0x332C, None, "SQUARE PAATU", 0x00, "CJK_Compat"),
    c(0x332D, None, "SQUARE BAARERU", 0x00, "CJK_Compat"),
    c(0x332E, None, "SQUARE PIASUTORU", 0x00, "CJK_Compat"),
    c(0x332F, None, "SQUARE PIKURU", 0x00, "CJK_Compat"),
    c(0x3330, None, "SQUARE PIKO", 0x00, "CJK_Compat"),
    c(0x3331, None, "SQUARE BIRU", 0x00, "CJK_Compat"),
    c(0x3332, None, "SQUARE HUARADDO", 0x00, "CJK_Compat"),
    c(0x3333, None, "SQUARE HUIITO", 0x00, "CJK_Compat"),
    c(0x3334, None, "SQUARE BUSSYERU", 0x00, "CJK_Compat"),
    c(0x3335, None, "SQUARE HURAN", 0x00, "CJK_Compat"),
    c(0x3336, None, "SQUARE HEKUTAARU", 0x00, "CJK_Compat"),
    c(0x3337, None, "SQUARE PESO", 0x00, "CJK_Compat"),
    c(0x3338, None, "SQUARE PENIHI", 0x00, "CJK_Compat"),
    c(0x3339, None, "SQUARE HERUTU", 0x00, "CJK_Compat"),
    c(0x333A, None, "SQUARE PENSU", 0x00, "CJK_Compat"),
    c(0x333B, None, "SQUARE PEEZI", 0x00, "CJK_Compat"),
    c(0x333C, None, "SQUARE BEETA", 0x00, "CJK_Compat"),
    c(0x333D, None, "SQUARE POINTO", 0x00, "CJK_Compat"),
    c(0x333E, None, "SQUARE BORUTO", 0x00, "CJK_Compat"),
    c(0x333F, None, "SQUARE HON", 0x00, "CJK_Compat"),
    c(0x3340, None, "SQUARE PONDO", 0x00, "CJK_Compat"),
    c(0x3341, None, "SQUARE HOORU", 0x00, "CJK_Compat"),
    c(0x3342, None, "SQUARE HOON", 0x00, "CJK_Compat"),
    c(0x3343, None, "SQUARE MAIKURO", 0x00, "CJK_Compat"),
    c(0x3344, None, "SQUARE MAIRU", 0x00, "CJK_Compat"),
    c(0x3345, None, "SQUARE MAHHA", 0x00, "CJK_Compat"),
    c(0x3346, None, "SQUARE MARUKU", 0x00, "CJK_Compat"),
    c(0x3347, None, "SQUARE MANSYON", 0x00, "CJK_Compat"),
    c(0x3348, None, "SQUARE MIKURON", 0x00, "CJK_Compat"),
    c(0x3349, None, "SQUARE MIRI", 0x00, "CJK_Compat"),
    c(0x334A, None, "SQUARE MIRIBAARU", 0x00, "CJK_Compat"),
    c(0x334B, None, "SQUARE MEGA", 0x00, "CJK_Compat"),
    c(0x334C, None, "SQUARE MEGATON", 0x00, "CJK_Compat"),
    c(0x334D, None, "SQUARE MEETORU", 0x00, "CJK_Compat"),
    c(0x334E, None, "SQUARE YAADO", 0x00, "CJK_Compat"),
    c(0x334F, None, "SQUARE YAARU", 0x00, "CJK_Compat"),
    c(0x3350, None, "SQUARE YUAN", 0x00, "CJK_Compat"),
    c(0x3351, None, "SQUARE RITTORU", 0x00, "CJK_Compat"),
    c(0x3352, None, "SQUARE RIRA", 0x00, "CJK_Compat"),
    c(0x3353, None, "SQUARE RUPII", 0x00, "CJK_Compat"),
    c(0x3354, None, "SQUARE RUUBURU", 0x00, "CJK_Compat"),
    c(0x3355, None, "SQUARE REMU", 0x00, "CJK_Compat"),
    c(0x3356, None, "SQUARE RENTOGEN", 0x00, "CJK_Compat"),
    c(0x3357, None, "SQUARE WATTO", 0x00, "CJK_Compat"),
    c(0x3358, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR ZERO", 0x00, "CJK_Compat"),
    c(0x3359, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR ONE", 0x00, "CJK_Compat"),
    c(0x335A, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR TWO", 0x00, "CJK_Compat"),
    c(0x335B, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR THREE", 0x00, "CJK_Compat"),
    c(0x335C, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR FOUR", 0x00, "CJK_Compat"),
    c(0x335D, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR FIVE", 0x00, "CJK_Compat"),
    c(0x335E, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR SIX", 0x00, "CJK_Compat"),
    c(0x335F, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR SEVEN", 0x00, "CJK_Compat"),
    c(0x3360, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR EIGHT", 0x00, "CJK_Compat"),
    c(0x3361, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR NINE", 0x00, "CJK_Compat"),
    c(0x3362, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR TEN", 0x00, "CJK_Compat"),
    c(0x3363, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR ELEVEN", 0x00, "CJK_Compat"),
    c(0x3364, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR TWELVE", 0x00, "CJK_Compat"),
    c(0x3365, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR THIRTEEN", 0x00, "CJK_Compat"),
    c(0x3366, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR FOURTEEN", 0x00, "CJK_Compat"),
    c(0x3367, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR FIFTEEN", 0x00, "CJK_Compat"),
    c(0x3368, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR SIXTEEN", 0x00, "CJK_Compat"),
    c(0x3369, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR SEVENTEEN", 0x00, "CJK_Compat"),
    c(0x336A, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR EIGHTEEN", 0x00, "CJK_Compat"),
    c(0x336B, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR NINETEEN", 0x00, "CJK_Compat"),
    c(0x336C, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR TWENTY", 0x00, "CJK_Compat"),
    c(0x336D, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR TWENTY-ONE", 0x00, "CJK_Compat"),
    c(0x336E, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR TWENTY-TWO", 0x00, "CJK_Compat"),
    c(0x336F, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR TWENTY-THREE", 0x00, "CJK_Compat"),
    c(0x3370, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR TWENTY-FOUR", 0x00, "CJK_Compat"),
    c(0x3371, None, "SQUARE HPA", 0x00, "CJK_Compat"),
    c(0x3372, None, "SQUARE DA", 0x00, "CJK_Compat"),
    c(0x3373, None, "SQUARE AU", 0x00, "CJK_Compat"),
    c(0x3374, None, "SQUARE BAR", 0x00, "CJK_Compat"),
    c(0x3375, None, "SQUARE OV", 0x00, "CJK_Compat"),
    c(0x3376, None, "SQUARE PC", 0x00, "CJK_Compat"),
    c(0x3377, None, "SQUARE DM", 0x00, "CJK_Compat"),
    c(0x3378, None, "SQUARE DM SQUARED", 0x00, "CJK_Compat"),
    c(0x3379, None, "SQUARE DM CUBED", 0x00, "CJK_Compat"),
    c(0x337A, None, "SQUARE IU", 0x00, "CJK_Compat"),
    c(0x337B, None, "SQUARE ERA NAME HEISEI", 0x00, "CJK_Compat"),
    c(0x337C, None, "SQUARE ERA NAME SYOUWA", 0x00, "CJK_Compat"),
    c(0x337D, None, "SQUARE ERA NAME TAISYOU", 0x00, "CJK_Compat"),
    c(0x337E, None, "SQUARE ERA NAME MEIZI", 0x00, "CJK_Compat"),
    c(0x337F, None, "SQUARE CORPORATION", 0x00, "CJK_Compat"),
    c(0x3380, None, "SQUARE PA AMPS", 0x00, "CJK_Compat"),
    c(0x3381, None, "SQUARE NA", 0x00, "CJK_Compat"),
    c(0x3382, None, "SQUARE MU A", 0x00, "CJK_Compat"),
    c(0x3383, None, "SQUARE MA", 0x00, "CJK_Compat"),
    c(0x3384, None, "SQUARE KA", 0x00, "CJK_Compat"),
    c(0x3385, None, "SQUARE KB", 0x00, "CJK_Compat"),
    c(0x3386, None, "SQUARE MB", 0x00, "CJK_Compat"),
    c(0x3387, None, "SQUARE GB", 0x00, "CJK_Compat"),
    c(0x3388, None, "SQUARE CAL", 0x00, "CJK_Compat"),
    c(0x3389, None, "SQUARE KCAL", 0x00, "CJK_Compat"),
    c(0x338A, None, "SQUARE PF", 0x00, "CJK_Compat"),
    c(0x338B, None, "SQUARE NF", 0x00, "CJK_Compat"),
    c(0x338C, None, "SQUARE MU F", 0x00, "CJK_Compat"),
    c(0x338D, None, "SQUARE MU G", 0x00, "CJK_Compat"),
    c(0x338E, None, "SQUARE MG", 0x00, "CJK_Compat"),
    c(0x338F, None, "SQUARE KG", 0x00, "CJK_Compat"),
    c(0x3390, None, "SQUARE HZ", 0x00, "CJK_Compat"),
    c(0x3391, None, "SQUARE KHZ", 0x00, "CJK_Compat"),
    c(0x3392, None, "SQUARE MHZ", 0x00, "CJK_Compat"),
    c(0x3393, None, "SQUARE GHZ", 0x00, "CJK_Compat"),
    c(0x3394, None, "SQUARE THZ", 0x00, "CJK_Compat"),
    c(0x3395, None, "SQUARE MU L", 0x00, "CJK_Compat"),
    c(0x3396, None, "SQUARE ML", 0x00, "CJK_Compat"),
    c(0x3397, None, "SQUARE DL", 0x00, "CJK_Compat"),
    c(0x3398, None, "SQUARE KL", 0x00, "CJK_Compat"),
    c(0x3399, None, "SQUARE FM", 0x00, "CJK_Compat"),
    c(0x339A, None, "SQUARE NM", 0x00, "CJK_Compat"),
    c(0x339B, None, "SQUARE MU M", 0x00, "CJK_Compat"),
    c(0x339C, None, "SQUARE MM", 0x00, "CJK_Compat"),
    c(0x339D, None, "SQUARE CM", 0x00, "CJK_Compat"),
    c(0x339E, None, "SQUARE KM", 0x00, "CJK_Compat"),
    c(0x339F, None, "SQUARE MM SQUARED", 0x00, "CJK_Compat"),
    c(0x33A0, None, "SQUARE CM SQUARED", 0x00, "CJK_Compat"),
    c(0x33A1, None, "SQUARE M SQUARED", 0x00, "CJK_Compat"),
    c(0x33A2, None, "SQUARE KM SQUARED", 0x00, "CJK_Compat"),
    c(0x33A3, None, "SQUARE MM CUBED", 0x00, "CJK_Compat"),
    c(0x33A4, None, "SQUARE CM CUBED", 0x00, "CJK_Compat"),
    c(0x33A5, None, "SQUARE M CUBED", 0x00, "CJK_Compat"),
    c(0x33A6, None, "SQUARE KM CUBED", 0x00, "CJK_Compat"),
    c(0x33A7, None, "SQUARE M OVER S", 0x00, "CJK_Compat"),
    c(0x33A8, None, "SQUARE M OVER S SQUARED", 0x00, "CJK_Compat"),
    c(0x33A9, None, "SQUARE PA", 0x00, "CJK_Compat"),
    c(0x33AA, None, "SQUARE KPA", 0x00, "CJK_Compat"),
    c(0x33AB, None, "SQUARE MPA", 0x00, "CJK_Compat"),
    c(0x33AC, None, "SQUARE GPA", 0x00, "CJK_Compat"),
    c(0x33AD, None, "SQUARE RAD", 0x00, "CJK_Compat"),
    c(0x33AE, None, "SQUARE RAD OVER S", 0x00, "CJK_Compat"),
    c(0x33AF, None, "SQUARE RAD OVER S SQUARED", 0x00, "CJK_Compat"),
    c(0x33B0, None, "SQUARE PS", 0x00, "CJK_Compat"),
    c(0x33B1, None, "SQUARE NS", 0x00, "CJK_Compat"),
    c(0x33B2, None, "SQUARE MU S", 0x00, "CJK_Compat"),
    c(0x33B3, None, "SQUARE MS", 0x00, "CJK_Compat"),
    c(0x33B4, None, "SQUARE PV", 0x00, "CJK_Compat"),
    c(0x33B5, None, "SQUARE NV", 0x00, "CJK_Compat"),
    c(0x33B6, None, "SQUARE MU V", 0x00, "CJK_Compat"),
    c(0x33B7, None, "SQUARE MV", 0x00, "CJK_Compat"),
    c(0x33B8, None, "SQUARE KV", 0x00, "CJK_Compat"),
    c(0x33B9, None, "SQUARE MV MEGA", 0x00, "CJK_Compat"),
    c(0x33BA, None, "SQUARE PW", 0x00, "CJK_Compat"),
    c(0x33BB, None, "SQUARE NW", 0x00, "CJK_Compat"),
    c(0x33BC, None, "SQUARE MU W", 0x00, "CJK_Compat"),
    c(0x33BD, None, "SQUARE MW", 0x00, "CJK_Compat"),
    c(0x33BE, None, "SQUARE KW", 0x00, "CJK_Compat"),
    c(0x33BF, None, "SQUARE MW MEGA", 0x00, "CJK_Compat"),
    c(0x33C0, None, "SQUARE K OHM", 0x00, "CJK_Compat"),
    c(0x33C1, None, "SQUARE M OHM", 0x00, "CJK_Compat"),
    c(0x33C2, None, "SQUARE AM", 0x00, "CJK_Compat"),
    c(0x33C3, None, "SQUARE BQ", 0x00, "CJK_Compat"),
    c(0x33C4, None, "SQUARE CC", 0x00, "CJK_Compat"),
    c(0x33C5, None, "SQUARE CD", 0x00, "CJK_Compat"),
    c(0x33C6, None, "SQUARE C OVER KG", 0x00, "CJK_Compat"),
    c(0x33C7, None, "SQUARE CO", 0x00, "CJK_Compat"),
    c(0x33C8, None, "SQUARE DB", 0x00, "CJK_Compat"),
    c(0x33C9, None, "SQUARE GY", 0x00, "CJK_Compat"),
    c(0x33CA, None, "SQUARE HA", 0x00, "CJK_Compat"),
    c(0x33CB, None, "SQUARE HP", 0x00, "CJK_Compat"),
    c(0x33CC, None, "SQUARE IN", 0x00, "CJK_Compat"),
    c(0x33CD, None, "SQUARE KK", 0x00, "CJK_Compat"),
    c(0x33CE, None, "SQUARE KM CAPITAL", 0x00, "CJK_Compat"),
    c(0x33CF, None, "SQUARE KT", 0x00, "CJK_Compat"),
    c(0x33D0, None, "SQUARE LM", 0x00, "CJK_Compat"),
    c(0x33D1, None, "SQUARE LN", 0x00, "CJK_Compat"),
    c(0x33D2, None, "SQUARE LOG", 0x00, "CJK_Compat"),
    c(0x33D3, None, "SQUARE LX", 0x00, "CJK_Compat"),
    c(0x33D4, None, "SQUARE MB SMALL", 0x00, "CJK_Compat"),
    c(0x33D5, None, "SQUARE MIL", 0x00, "CJK_Compat"),
    c(0x33D6, None, "SQUARE MOL", 0x00, "CJK_Compat"),
    c(0x33D7, None, "SQUARE PH", 0x00, "CJK_Compat"),
    c(0x33D8, None, "SQUARE PM", 0x00, "CJK_Compat"),
    c(0x33D9, None, "SQUARE PPM", 0x00, "CJK_Compat"),
    c(0x33DA, None, "SQUARE PR", 0x00, "CJK_Compat"),
    c(0x33DB, None, "SQUARE SR", 0x00, "CJK_Compat"),
    c(0x33DC, None, "SQUARE SV", 0x00, "CJK_Compat"),
    c(0x33DD, None, "SQUARE WB", 0x00, "CJK_Compat"),
    c(0x33DE, None, "SQUARE V OVER M", 0x00, "CJK_Compat"),
    c(0x33DF, None, "SQUARE A OVER M", 0x00, "CJK_Compat"),
    c(0x33E0, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY ONE", 0x00, "CJK_Compat"),
    c(0x33E1, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWO", 0x00, "CJK_Compat"),
    c(0x33E2, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY THREE", 0x00, "CJK_Compat"),
    c(0x33E3, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY FOUR", 0x00, "CJK_Compat"),
    c(0x33E4, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY FIVE", 0x00, "CJK_Compat"),
    c(0x33E5, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY SIX", 0x00, "CJK_Compat"),
    c(0x33E6, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY SEVEN", 0x00, "CJK_Compat"),
    c(0x33E7, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY EIGHT", 0x00, "CJK_Compat"),
    c(0x33E8, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY NINE", 0x00, "CJK_Compat"),
    c(0x33E9, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TEN", 0x00, "CJK_Compat"),
    c(0x33EA, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY ELEVEN", 0x00, "CJK_Compat"),
    c(0x33EB, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWELVE", 0x00, "CJK_Compat"),
    c(0x33EC, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY THIRTEEN", 0x00, "CJK_Compat"),
    c(0x33ED, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY FOURTEEN", 0x00, "CJK_Compat"),
    c(0x33EE, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY FIFTEEN", 0x00, "CJK_Compat"),
    c(0x33EF, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY SIXTEEN", 0x00, "CJK_Compat"),
    c(0x33F0, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY SEVENTEEN", 0x00, "CJK_Compat"),
    c(0x33F1, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY EIGHTEEN", 0x00, "CJK_Compat"),
    c(0x33F2, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY NINETEEN", 0x00, "CJK_Compat"),
    c(0x33F3, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY", 0x00, "CJK_Compat"),
    c(0x33F4, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY-ONE", 0x00, "CJK_Compat"),
    c(0x33F5, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY-TWO", 0x00, "CJK_Compat"),
    c(0x33F6, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY-THREE", 0x00, "CJK_Compat"),
    c(0x33F7, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY-FOUR", 0x00, "CJK_Compat"),
    c(0x33F8, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY-FIVE", 0x00, "CJK_Compat"),
    c(0x33F9, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY-SIX", 0x00, "CJK_Compat"),
    c(0x33FA, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY-SEVEN", 0x00, "CJK_Compat"),
    c(0x33FB, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY-EIGHT", 0x00, "CJK_Compat"),
    c(0x33FC, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY-NINE", 0x00, "CJK_Compat"),
    c(0x33FD, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY THIRTY", 0x00, "CJK_Compat"),
    c(0x33FE, None, "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY THIRTY-ONE", 0x00, "CJK_Compat"),
    c(0x33FF, None, "SQUARE GAL", 0x00, "CJK_Compat"),
    c(0x3400, Some(0x4DBF), "CJK UNIFIED IDEOGRAPH-#", 0x31, "CJK_Ext_A"),
    c(0x4DC0, None, "HEXAGRAM FOR THE CREATIVE HEAVEN", 0x00, "Yijing"),
    c(0x4DC1, None, "HEXAGRAM FOR THE RECEPTIVE EARTH", 0x00, "Yijing"),
    c(0x4DC2, None, "HEXAGRAM FOR DIFFICULTY AT THE BEGINNING", 0x00, "Yijing"),
    c(0x4DC3, None, "HEXAGRAM FOR YOUTHFUL FOLLY", 0x00, "Yijing"),
    c(0x4DC4, None, "HEXAGRAM FOR WAITING", 0x00, "Yijing"),
    c(0x4DC5, None, "HEXAGRAM FOR CONFLICT", 0x00, "Yijing"),
    c(0x4DC6, None, "HEXAGRAM FOR THE ARMY", 0x00, "Yijing"),
    c(0x4DC7, None, "HEXAGRAM FOR HOLDING TOGETHER", 0x00, "Yijing"),
    c(0x4DC8, None, "HEXAGRAM FOR SMALL TAMING", 0x00, "Yijing"),
    c(0x4DC9, None, "HEXAGRAM FOR TREADING", 0x00, "Yijing"),
    c(0x4DCA, None, "HEXAGRAM FOR PEACE", 0x00, "Yijing"),
    c(0x4DCB, None, "HEXAGRAM FOR STANDSTILL", 0x00, "Yijing"),
    c(0x4DCC, None, "HEXAGRAM FOR FELLOWSHIP", 0x00, "Yijing"),
    c(0x4DCD, None, "HEXAGRAM FOR GREAT POSSESSION", 0x00, "Yijing"),
    c(0x4DCE, None, "HEXAGRAM FOR MODESTY", 0x00, "Yijing"),
    c(0x4DCF, None, "HEXAGRAM FOR ENTHUSIASM", 0x00, "Yijing"),
    c(0x4DD0, None, "HEXAGRAM FOR FOLLOWING", 0x00, "Yijing"),
    c(0x4DD1, None, "HEXAGRAM FOR WORK ON THE DECAYED", 0x00, "Yijing"),
    c(0x4DD2, None, "HEXAGRAM FOR APPROACH", 0x00, "Yijing"),
    c(0x4DD3, None, "HEXAGRAM FOR CONTEMPLATION", 0x00, "Yijing"),
    c(0x4DD4, None, "HEXAGRAM FOR BITING THROUGH", 0x00, "Yijing"),
    c(0x4DD5, None, "HEXAGRAM FOR GRACE", 0x00, "Yijing"),
    c(0x4DD6, None, "HEXAGRAM FOR SPLITTING APART", 0x00, "Yijing"),
    c(0x4DD7, None, "HEXAGRAM FOR RETURN", 0x00, "Yijing"),
    c(0x4DD8, None, "HEXAGRAM FOR INNOCENCE", 0x00, "Yijing"),
    c(0x4DD9, None, "HEXAGRAM FOR GREAT TAMING", 0x00, "Yijing"),
    c(0x4DDA, None, "HEXAGRAM FOR MOUTH CORNERS", 0x00, "Yijing"),
    c(0x4DDB, None, "HEXAGRAM FOR GREAT PREPONDERANCE", 0x00, "Yijing"),
    c(0x4DDC, None, "HEXAGRAM FOR THE ABYSMAL WATER", 0x00, "Yijing"),
    c(0x4DDD, None, "HEXAGRAM FOR THE CLINGING FIRE", 0x00, "Yijing"),
    c(0x4DDE, None, "HEXAGRAM FOR INFLUENCE", 0x00, "Yijing"),
    c(0x4DDF, None, "HEXAGRAM FOR DURATION", 0x00, "Yijing"),
    c(0x4DE0, None, "HEXAGRAM FOR RETREAT", 0x00, "Yijing"),
    c(0x4DE1, None, "HEXAGRAM FOR GREAT POWER", 0x00, "Yijing"),
    c(0x4DE2, None, "HEXAGRAM FOR PROGRESS", 0x00, "Yijing"),
    c(0x4DE3, None, "HEXAGRAM FOR DARKENING OF THE LIGHT", 0x00, "Yijing"),
    c(0x4DE4, None, "HEXAGRAM FOR THE FAMILY", 0x00, "Yijing"),
    c(0x4DE5, None, "HEXAGRAM FOR OPPOSITION", 0x00, "Yijing"),
    c(0x4DE6, None, "HEXAGRAM FOR OBSTRUCTION", 0x00, "Yijing"),
    c(0x4DE7, None, "HEXAGRAM FOR DELIVERANCE", 0x00, "Yijing"),
    c(0x4DE8, None, "HEXAGRAM FOR DECREASE", 0x00, "Yijing"),
    c(0x4DE9, None, "HEXAGRAM FOR INCREASE", 0x00, "Yijing"),
    c(0x4DEA, None, "HEXAGRAM FOR BREAKTHROUGH", 0x00, "Yijing"),
    c(0x4DEB, None, "HEXAGRAM FOR COMING TO MEET", 0x00, "Yijing"),
    c(0x4DEC, None, "HEXAGRAM FOR GATHERING TOGETHER", 0x00, "Yijing"),
    c(0x4DED, None, "HEXAGRAM FOR PUSHING UPWARD", 0x00, "Yijing"),
    c(0x4DEE, None, "HEXAGRAM FOR OPPRESSION", 0x00, "Yijing"),
    c(0x4DEF, None, "HEXAGRAM FOR THE WELL", 0x00, "Yijing"),
    c(0x4DF0, None, "HEXAGRAM FOR REVOLUTION", 0x00, "Yijing"),
    c(0x4DF1, None, "HEXAGRAM FOR THE CAULDRON", 0x00, "Yijing"),
    c(0x4DF2, None, "HEXAGRAM FOR THE AROUSING THUNDER", 0x00, "Yijing"),
    c(0x4DF3, None, "HEXAGRAM FOR THE KEEPING STILL MOUNTAIN", 0x00, "Yijing"),
    c(0x4DF4, None, "HEXAGRAM FOR DEVELOPMENT", 0x00, "Yijing"),
    c(0x4DF5, None, "HEXAGRAM FOR THE MARRYING MAIDEN", 0x00, "Yijing"),
    c(0x4DF6, None, "HEXAGRAM FOR ABUNDANCE", 0x00, "Yijing"),
    c(0x4DF7, None, "HEXAGRAM FOR THE WANDERER", 0x00, "Yijing"),
    c(0x4DF8, None, "HEXAGRAM FOR THE GENTLE WIND", 0x00, "Yijing"),
    c(0x4DF9, None, "HEXAGRAM FOR THE JOYOUS LAKE", 0x00, "Yijing"),
    c(0x4DFA, None, "HEXAGRAM FOR DISPERSION", 0x00, "Yijing"),
    c(0x4DFB, None, "HEXAGRAM FOR LIMITATION", 0x00, "Yijing"),
    c(0x4DFC, None, "HEXAGRAM FOR INNER TRUTH", 0x00, "Yijing"),
    c(0x4DFD, None, "HEXAGRAM FOR SMALL PREPONDERANCE", 0x00, "Yijing"),
    c(0x4DFE, None, "HEXAGRAM FOR AFTER COMPLETION", 0x00, "Yijing"),
    c(0x4DFF, None, "HEXAGRAM FOR BEFORE COMPLETION", 0x00, "Yijing"),
    c(0x4E00, Some(0x9FFF), "CJK UNIFIED IDEOGRAPH-#", 0x31, "CJK"),
    c(0xA000, None, "YI SYLLABLE IT", 0x31, "Yi_Syllables"),
    c(0xA001, None, "YI SYLLABLE IX", 0x31, "Yi_Syllables"),
    c(0xA002, None, "YI SYLLABLE I", 0x31, "Yi_Syllables"),
    c(0xA003, None, "YI SYLLABLE IP", 0x31, "Yi_Syllables"),
    c(0xA004, None, "YI SYLLABLE IET", 0x31, "Yi_Syllables"),
    c(0xA005, None, "YI SYLLABLE IEX", 0x31, "Yi_Syllables"),
    c(0xA006, None, "YI SYLLABLE IE", 0x31, "Yi_Syllables"),
    c(0xA007, None, "YI SYLLABLE IEP", 0x31, "Yi_Syllables"),
    c(0xA008, None, "YI SYLLABLE AT", 0x31, "Yi_Syllables"),
    c(0xA009, None, "YI SYLLABLE AX", 0x31, "Yi_Syllables"),
    c(0xA00A, None, "YI SYLLABLE A", 0x31, "Yi_Syllables"),
    c(0xA00B, None, "YI SYLLABLE AP", 0x31, "Yi_Syllables"),
    c(0xA00C, None, "YI SYLLABLE UOX", 0x31, "Yi_Syllables"),
    c(0xA00D, None, "YI SYLLABLE UO", 0x31, "Yi_Syllables"),
    c(0xA00E, None, "YI SYLLABLE UOP", 0x31, "Yi_Syllables"),
    c(0xA00F, None, "YI SYLLABLE OT", 0x31, "Yi_Syllables"),
    c(0xA010, None, "YI SYLLABLE OX", 0x31, "Yi_Syllables"),
    c(0xA011, None, "YI SYLLABLE O", 0x31, "Yi_Syllables"),
    c(0xA012, None, "YI SYLLABLE OP", 0x31, "Yi_Syllables"),
    c(0xA013, None, "YI SYLLABLE EX", 0x31, "Yi_Syllables"),
    c(0xA014, None, "YI SYLLABLE E", 0x31, "Yi_Syllables"),
    c(0xA015, None, "YI SYLLABLE ITERATION MARK", 0x31, "Yi_Syllables"),
    c(0xA016, None, "YI SYLLABLE BIT", 0x31, "Yi_Syllables"),
    c(0xA017, None, "YI SYLLABLE BIX", 0x31, "Yi_Syllables"),
    c(0xA018, None, "YI SYLLABLE BI", 0x31, "Yi_Syllables"),
    c(0xA019, None, "YI SYLLABLE BIP", 0x31, "Yi_Syllables"),
    c(0xA01A, None, "YI SYLLABLE BIET", 0x31, "Yi_Syllables"),
    c(0xA01B, None, "YI SYLLABLE BIEX", 0x31, "Yi_Syllables"),
    c(0xA01C, None, "YI SYLLABLE BIE", 0x31, "Yi_Syllables"),
    c(0xA01D, None, "YI SYLLABLE BIEP", 0x31, "Yi_Syllables"),
    c(0xA01E, None, "YI SYLLABLE BAT", 0x31, "Yi_Syllables"),
    c(0xA01F, None, "YI SYLLABLE BAX", 0x31, "Yi_Syllables"),
    c(0xA020, None, "YI SYLLABLE BA", 0x31, "Yi_Syllables"),
    c(0xA021, None, "YI SYLLABLE BAP", 0x31, "Yi_Syllables"),
    c(0xA022, None, "YI SYLLABLE BUOX", 0x31, "Yi_Syllables"),
    c(0xA023, None, "YI SYLLABLE BUO", 0x31, "Yi_Syllables"),
    c(0xA024, None, "YI SYLLABLE BUOP", 0x31, "Yi_Syllables"),
    c(0xA025, None, "YI SYLLABLE BOT", 0x31, "Yi_Syllables"),
    c(0xA026, None, "YI SYLLABLE BOX", 0x31, "Yi_Syllables"),
    c(0xA027, None, "YI SYLLABLE BO", 0x31, "Yi_Syllables"),
    c(0xA028, None, "YI SYLLABLE BOP", 0x31, "Yi_Syllables"),
    c(0xA029, None, "YI SYLLABLE BEX", 0x31, "Yi_Syllables"),
    c(0xA02A, None, "YI SYLLABLE BE", 0x31, "Yi_Syllables"),
    c(0xA02B, None, "YI SYLLABLE BEP", 0x31, "Yi_Syllables"),
    c(0xA02C, None, "YI SYLLABLE BUT", 0x31, "Yi_Syllables"),
    c(0xA02D, None, "YI SYLLABLE BUX", 0x31, "Yi_Syllables"),
    c(0xA02E, None, "YI SYLLABLE BU", 0x31, "Yi_Syllables"),
    c(0xA02F, None, "YI SYLLABLE BUP", 0x31, "Yi_Syllables"),
    c(0xA030, None, "YI SYLLABLE BURX", 0x31, "Yi_Syllables"),
    c(0xA031, None, "YI SYLLABLE BUR", 0x31, "Yi_Syllables"),
    c(0xA032, None, "YI SYLLABLE BYT", 0x31, "Yi_Syllables"),
    c(0xA033, None, "YI SYLLABLE BYX", 0x31, "Yi_Syllables"),
    c(0xA034, None, "YI SYLLABLE BY", 0x31, "Yi_Syllables"),
    c(0xA035, None, "YI SYLLABLE BYP", 0x31, "Yi_Syllables"),
    c(0xA036, None, "YI SYLLABLE BYRX", 0x31, "Yi_Syllables"),
    c(0xA037, None, "YI SYLLABLE BYR", 0x31, "Yi_Syllables"),
    c(0xA038, None, "YI SYLLABLE PIT", 0x31, "Yi_Syllables"),
    c(0xA039, None, "YI SYLLABLE PIX", 0x31, "Yi_Syllables"),
    c(0xA03A, None, "YI SYLLABLE PI", 0x31, "Yi_Syllables"),
    c(0xA03B, None, "YI SYLLABLE PIP", 0x31, "Yi_Syllables"),
    c(0xA03C, None, "YI SYLLABLE PIEX", 0x31, "Yi_Syllables"),
    c(0xA03D, None, "YI SYLLABLE PIE", 0x31, "Yi_Syllables"),
    c(0xA03E, None, "YI SYLLABLE PIEP", 0x31, "Yi_Syllables"),
    c(0xA03F, None, "YI SYLLABLE PAT", 0x31, "Yi_Syllables"),
    c(0xA040, None, "YI SYLLABLE PAX", 0x31, "Yi_Syllables"),
    c(0xA041, None, "YI SYLLABLE PA", 0x31, "Yi_Syllables"),
    c(0xA042, None, "YI SYLLABLE PAP", 0x31, "Yi_Syllables"),
    c(0xA043, None, "YI SYLLABLE PUOX", 0x31, "Yi_Syllables"),
    c(0xA044, None, "YI SYLLABLE PUO", 0x31, "Yi_Syllables"),
    c(0xA045, None, "YI SYLLABLE PUOP", 0x31, "Yi_Syllables"),
    c(0xA046, None, "YI SYLLABLE POT", 0x31, "Yi_Syllables"),
    c(0xA047, None, "YI SYLLABLE POX", 0x31, "Yi_Syllables"),
    c(0xA048, None, "YI SYLLABLE PO", 0x31, "Yi_Syllables"),
    c(0xA049, None, "YI SYLLABLE POP", 0x31, "Yi_Syllables"),
    c(0xA04A, None, "YI SYLLABLE PUT", 0x31, "Yi_Syllables"),
    c(0xA04B, None, "YI SYLLABLE PUX", 0x31, "Yi_Syllables"),
    c(0xA04C, None, "YI SYLLABLE PU", 0x31, "Yi_Syllables"),
    c(0xA04D, None, "YI SYLLABLE PUP", 0x31, "Yi_Syllables"),
    c(0xA04E, None, "YI SYLLABLE PURX", 0x31, "Yi_Syllables"),
    c(0xA04F, None, "YI SYLLABLE PUR", 0x31, "Yi_Syllables"),
    c(0xA050, None, "YI SYLLABLE PYT", 0x31, "Yi_Syllables"),
    c(0xA051, None, "YI SYLLABLE PYX", 0x31, "Yi_Syllables"),
    c(0xA052, None, "YI SYLLABLE PY", 0x31, "Yi_Syllables"),
    c(0xA053, None, "YI SYLLABLE PYP", 0x31, "Yi_Syllables"),
    c(0xA054, None, "YI SYLLABLE PYRX", 0x31, "Yi_Syllables"),
    c(0xA055, None, "YI SYLLABLE PYR", 0x31, "Yi_Syllables"),
    c(0xA056, None, "YI SYLLABLE BBIT", 0x31, "Yi_Syllables"),
    c(0xA057, None, "YI SYLLABLE BBIX", 0x31, "Yi_Syllables"),
    c(0xA058, None, "YI SYLLABLE BBI", 0x31, "Yi_Syllables"),
    c(0xA059, None, "YI SYLLABLE BBIP", 0x31, "Yi_Syllables"),
    c(0xA05A, None, "YI SYLLABLE BBIET", 0x31, "Yi_Syllables"),
    c(0xA05B, None, "YI SYLLABLE BBIEX", 0x31, "Yi_Syllables"),
    c(0xA05C, None, "YI SYLLABLE BBIE", 0x31, "Yi_Syllables"),
    c(0xA05D, None, "YI SYLLABLE BBIEP", 0x31, "Yi_Syllables"),
    c(0xA05E, None, "YI SYLLABLE BBAT", 0x31, "Yi_Syllables"),
    c(0xA05F, None, "YI SYLLABLE BBAX", 0x31, "Yi_Syllables"),
    c(0xA060, None, "YI SYLLABLE BBA", 0x31, "Yi_Syllables"),
    c(0xA061, None, "YI SYLLABLE BBAP", 0x31, "Yi_Syllables"),
    c(0xA062, None, "YI SYLLABLE BBUOX", 0x31, "Yi_Syllables"),
    c(0xA063, None, "YI SYLLABLE BBUO", 0x31, "Yi_Syllables"),
    c(0xA064, None, "YI SYLLABLE BBUOP", 0x31, "Yi_Syllables"),
    c(0xA065, None, "YI SYLLABLE BBOT", 0x31, "Yi_Syllables"),
    c(0xA066, None, "YI SYLLABLE BBOX", 0x31, "Yi_Syllables"),
    c(0xA067, None, "YI SYLLABLE BBO", 0x31, "Yi_Syllables"),
    c(0xA068, None, "YI SYLLABLE BBOP", 0x31, "Yi_Syllables"),
    c(0xA069, None, "YI SYLLABLE BBEX", 0x31, "Yi_Syllables"),
    c(0xA06A, None, "YI SYLLABLE BBE", 0x31, "Yi_Syllables"),
    c(0xA06B, None, "YI SYLLABLE BBEP", 0x31, "Yi_Syllables"),
    c(0xA06C, None, "YI SYLLABLE BBUT", 0x31, "Yi_Syllables"),
    c(0xA06D, None, "YI SYLLABLE BBUX", 0x31, "Yi_Syllables"),
    c(0xA06E, None, "YI SYLLABLE BBU", 0x31, "Yi_Syllables"),
    c(0xA06F, None, "YI SYLLABLE BBUP", 0x31, "Yi_Syllables"),
    c(0xA070, None, "YI SYLLABLE BBURX", 0x31, "Yi_Syllables"),
    c(0xA071, None, "YI SYLLABLE BBUR", 0x31, "Yi_Syllables"),
    c(0xA072, None, "YI SYLLABLE BBYT", 0x31, "Yi_Syllables"),
    c(0xA073, None, "YI SYLLABLE BBYX", 0x31, "Yi_Syllables"),
    c(0xA074, None, "YI SYLLABLE BBY", 0x31, "Yi_Syllables"),
    c(0xA075, None, "YI SYLLABLE BBYP", 0x31, "Yi_Syllables"),
    c(0xA076, None, "YI SYLLABLE NBIT", 0x31, "Yi_Syllables"),
    c(0xA077, None, "YI SYLLABLE NBIX", 0x31, "Yi_Syllables"),
    c(0xA078, None, "YI SYLLABLE NBI", 0x31, "Yi_Syllables"),
    c(0xA079, None, "YI SYLLABLE NBIP", 0x31, "Yi_Syllables"),
    c(0xA07A, None, "YI SYLLABLE NBIEX", 0x31, "Yi_Syllables"),
    c(0xA07B, None, "YI SYLLABLE NBIE", 0x31, "Yi_Syllables"),
    c(0xA07C, None, "YI SYLLABLE NBIEP", 0x31, "Yi_Syllables"),
    c(0xA07D, None, "YI SYLLABLE NBAT", 0x31, "Yi_Syllables"),
    c(0xA07E, None, "YI SYLLABLE NBAX", 0x31, "Yi_Syllables"),
    c(0xA07F, None, "YI SYLLABLE NBA", 0x31, "Yi_Syllables"),
    c(0xA080, None, "YI SYLLABLE NBAP", 0x31, "Yi_Syllables"),
    c(0xA081, None, "YI SYLLABLE NBOT", 0x31, "Yi_Syllables"),
    c(0xA082, None, "YI SYLLABLE NBOX", 0x31, "Yi_Syllables"),
    c(0xA083, None, "YI SYLLABLE NBO", 0x31, "Yi_Syllables"),
    c(0xA084, None, "YI SYLLABLE NBOP", 0x31, "Yi_Syllables"),
    c(0xA085, None, "YI SYLLABLE NBUT", 0x31, "Yi_Syllables"),
    c(0xA086, None, "YI SYLLABLE NBUX", 0x31, "Yi_Syllables"),
    c(0xA087, None, "YI SYLLABLE NBU", 0x31, "Yi_Syllables"),
    c(0xA088, None, "YI SYLLABLE NBUP", 0x31, "Yi_Syllables"),
    c(0xA089, None, "YI SYLLABLE NBURX", 0x31, "Yi_Syllables"),
    c(0xA08A, None, "YI SYLLABLE NBUR", 0x31, "Yi_Syllables"),
    c(0xA08B, None, "YI SYLLABLE NBYT", 0x31, "Yi_Syllables"),
    c(0xA08C, None, "YI SYLLABLE NBYX", 0x31, "Yi_Syllables"),
    c(0xA08D, None, "YI SYLLABLE NBY", 0x31, "Yi_Syllables"),
    c(0xA08E, None, "YI SYLLABLE NBYP", 0x31, "Yi_Syllables"),
    c(0xA08F, None, "YI SYLLABLE NBYRX", 0x31, "Yi_Syllables"),
    c(0xA090, None, "YI SYLLABLE NBYR", 0x31, "Yi_Syllables"),
    c(0xA091, None, "YI SYLLABLE HMIT", 0x31, "Yi_Syllables"),
    c(0xA092, None, "YI SYLLABLE HMIX", 0x31, "Yi_Syllables"),
    c(0xA093, None, "YI SYLLABLE HMI", 0x31, "Yi_Syllables"),
    c(0xA094, None, "YI SYLLABLE HMIP", 0x31, "Yi_Syllables"),
    c(0xA095, None, "YI SYLLABLE HMIEX", 0x31, "Yi_Syllables"),
    c(0xA096, None, "YI SYLLABLE HMIE", 0x31, "Yi_Syllables"),
    c(0xA097, None, "YI SYLLABLE HMIEP", 0x31, "Yi_Syllables"),
    c(0xA098, None, "YI SYLLABLE HMAT", 0x31, "Yi_Syllables"),
    c(0xA099, None, "YI SYLLABLE HMAX", 0x31, "Yi_Syllables"),
    c(0xA09A, None, "YI SYLLABLE HMA", 0x31, "Yi_Syllables"),
    c(0xA09B, None, "YI SYLLABLE HMAP", 0x31, "Yi_Syllables"),
    c(0xA09C, None, "YI SYLLABLE HMUOX", 0x31, "Yi_Syllables"),
    c(0xA09D, None, "YI SYLLABLE HMUO", 0x31, "Yi_Syllables"),
    c(0xA09E, None, "YI SYLLABLE HMUOP", 0x31, "Yi_Syllables"),
    c(0xA09F, None, "YI SYLLABLE HMOT", 0x31, "Yi_Syllables"),
    c(0xA0A0, None, "YI SYLLABLE HMOX", 0x31, "Yi_Syllables"),
    c(0xA0A1, None, "YI SYLLABLE HMO", 0x31, "Yi_Syllables"),
    c(0xA0A2, None, "YI SYLLABLE HMOP", 0x31, "Yi_Syllables"),
    c(0xA0A3, None, "YI SYLLABLE HMUT", 0x31, "Yi_Syllables"),
    c(0xA0A4, None, "YI SYLLABLE HMUX", 0x31, "Yi_Syllables"),
    c(0xA0A5, None, "YI SYLLABLE HMU", 0x31, "Yi_Syllables"),
    c(0xA0A6, None, "YI SYLLABLE HMUP", 0x31, "Yi_Syllables"),
    c(0xA0A7, None, "YI SYLLABLE HMURX", 0x31, "Yi_Syllables"),
    c(0xA0A8, None, "YI SYLLABLE HMUR", 0x31, "Yi_Syllables"),
    c(0xA0A9, None, "YI SYLLABLE HMYX", 0x31, "Yi_Syllables"),
    c(0xA0AA, None, "YI SYLLABLE HMY", 0x31, "Yi_Syllables"),
    c(0xA0AB, None, "YI SYLLABLE HMYP", 0x31, "Yi_Syllables"),
    c(0xA0AC, None, "YI SYLLABLE HMYRX", 0x31, "Yi_Syllables"),
    c(0xA0AD, None, "YI SYLLABLE HMYR", 0x31, "Yi_Syllables"),
    c(0xA0AE, None, "YI SYLLABLE MIT", 0x31, "Yi_Syllables"),
    c(0xA0AF, None, "YI SYLLABLE MIX", 0x31, "Yi_Syllables"),
    c(0xA0B0, None, "YI SYLLABLE MI", 0x31, "Yi_Syllables"),
    c(0xA0B1, None, "YI SYLLABLE MIP", 0x31, "Yi_Syllables"),
    c(0xA0B2, None, "YI SYLLABLE MIEX", 0x31, "Yi_Syllables"),
    c(0xA0B3, None, "YI SYLLABLE MIE", 0x31, "Yi_Syllables"),
    c(0xA0B4, None, "YI SYLLABLE MIEP", 0x31, "Yi_Syllables"),
    c(0xA0B5, None, "YI SYLLABLE MAT", 0x31, "Yi_Syllables"),
    c(0xA0B6, None, "YI SYLLABLE MAX", 0x31, "Yi_Syllables"),
    c(0xA0B7, None, "YI SYLLABLE MA", 0x31, "Yi_Syllables"),
    c(0xA0B8, None, "YI SYLLABLE MAP", 0x31, "Yi_Syllables"),
    c(0xA0B9, None, "YI SYLLABLE MUOT", 0x31, "Yi_Syllables"),
    c(0xA0BA, None, "YI SYLLABLE MUOX", 0x31, "Yi_Syllables"),
    c(0xA0BB, None, "YI SYLLABLE MUO", 0x31, "Yi_Syllables"),
    c(0xA0BC, None, "YI SYLLABLE MUOP", 0x31, "Yi_Syllables"),
    c(0xA0BD, None, "YI SYLLABLE MOT", 0x31, "Yi_Syllables"),
    c(0xA0BE, None, "YI SYLLABLE MOX", 0x31, "Yi_Syllables"),
    c(0xA0BF, None, "YI SYLLABLE MO", 0x31, "Yi_Syllables"),
    c(0xA0C0, None, "YI SYLLABLE MOP", 0x31, "Yi_Syllables"),
    c(0xA0C1, None, "YI SYLLABLE MEX", 0x31, "Yi_Syllables"),
    c(0xA0C2, None, "YI SYLLABLE ME", 0x31, "Yi_Syllables"),
    c(0xA0C3, None, "YI SYLLABLE MUT", 0x31, "Yi_Syllables"),
    c(0xA0C4, None, "YI SYLLABLE MUX", 0x31, "Yi_Syllables"),
    c(0xA0C5, None, "YI SYLLABLE MU", 0x31, "Yi_Syllables"),
    c(0xA0C6, None, "YI SYLLABLE MUP", 0x31, "Yi_Syllables"),
    c(0xA0C7, None, "YI SYLLABLE MURX", 0x31, "Yi_Syllables"),
    c(0xA0C8, None, "YI SYLLABLE MUR", 0x31, "Yi_Syllables"),
    c(0xA0C9, None, "YI SYLLABLE MYT", 0x31, "Yi_Syllables"),
    c(0xA0CA, None, "YI SYLLABLE MYX", 0x31, "Yi_Syllables"),
    c(0xA0CB, None, "YI SYLLABLE MY", 0x31, "Yi_Syllables"),
    c(0xA0CC, None, "YI SYLLABLE MYP", 0x31, "Yi_Syllables"),
    c(0xA0CD, None, "YI SYLLABLE FIT", 0x31, "Yi_Syllables"),
    c(0xA0CE, None, "YI SYLLABLE FIX", 0x31, "Yi_Syllables"),
    c(0xA0CF, None, "YI SYLLABLE FI", 0x31, "Yi_Syllables"),
    c(0xA0D0, None, "YI SYLLABLE FIP", 0x31, "Yi_Syllables"),
    c(0xA0D1, None, "YI SYLLABLE FAT", 0x31, "Yi_Syllables"),
    c(0xA0D2, None, "YI SYLLABLE FAX", 0x31, "Yi_Syllables"),
    c(0xA0D3, None, "YI SYLLABLE FA", 0x31, "Yi_Syllables"),
    c(0xA0D4, None, "YI SYLLABLE FAP", 0x31, "Yi_Syllables"),
    c(0xA0D5, None, "YI SYLLABLE FOX", 0x31, "Yi_Syllables"),
    c(0xA0D6, None, "YI SYLLABLE FO", 0x31, "Yi_Syllables"),
    c(0xA0D7, None, "YI SYLLABLE FOP", 0x31, "Yi_Syllables"),
    c(0xA0D8, None, "YI SYLLABLE FUT", 0x31, "Yi_Syllables"),
    c(0xA0D9, None, "YI SYLLABLE FUX", 0x31, "Yi_Syllables"),
    c(0xA0DA, None, "YI SYLLABLE FU", 0x31, "Yi_Syllables"),
    c(0xA0DB, None, "YI SYLLABLE FUP", 0x31, "Yi_Syllables"),
    c(0xA0DC, None, "YI SYLLABLE FURX", 0x31, "Yi_Syllables"),
    c(0xA0DD, None, "YI SYLLABLE FUR", 0x31, "Yi_Syllables"),
    c(0xA0DE, None, "YI SYLLABLE FYT", 0x31, "Yi_Syllables"),
    c(0xA0DF, None, "YI SYLLABLE FYX", 0x31, "Yi_Syllables"),
    c(0xA0E0, None, "YI SYLLABLE FY", 0x31, "Yi_Syllables"),
    c(0xA0E1, None, "YI SYLLABLE FYP", 0x31, "Yi_Syllables"),
    c(0xA0E2, None, "YI SYLLABLE VIT", 0x31, "Yi_Syllables"),
    c(0xA0E3, None, "YI SYLLABLE VIX", 0x31, "Yi_Syllables"),
    c(0xA0E4, None, "YI SYLLABLE VI", 0x31, "Yi_Syllables"),
    c(0xA0E5, None, "YI SYLLABLE VIP", 0x31, "Yi_Syllables"),
    c(0xA0E6, None, "YI SYLLABLE VIET", 0x31, "Yi_Syllables"),
    c(0xA0E7, None, "YI SYLLABLE VIEX", 0x31, "Yi_Syllables"),
    c(0xA0E8, None, "YI SYLLABLE VIE", 0x31, "Yi_Syllables"),
    c(0xA0E9, None, "YI SYLLABLE VIEP", 0x31, "Yi_Syllables"),
    c(0xA0EA, None, "YI SYLLABLE VAT", 0x31, "Yi_Syllables"),
    c(0xA0EB, None, "YI SYLLABLE VAX", 0x31, "Yi_Syllables"),
    c(0xA0EC, None, "YI SYLLABLE VA", 0x31, "Yi_Syllables"),
    c(0xA0ED, None, "YI SYLLABLE VAP", 0x31, "Yi_Syllables"),
    c(0xA0EE, None, "YI SYLLABLE VOT", 0x31, "Yi_Syllables"),
    c(0xA0EF, None, "YI SYLLABLE VOX", 0x31, "Yi_Syllables"),
    c(0xA0F0, None, "YI SYLLABLE VO", 0x31, "Yi_Syllables"),
    c(0xA0F1, None, "YI SYLLABLE VOP", 0x31, "Yi_Syllables"),
    c(0xA0F2, None, "YI SYLLABLE VEX", 0x31, "Yi_Syllables"),
    c(0xA0F3, None, "YI SYLLABLE VEP", 0x31, "Yi_Syllables"),
    c(0xA0F4, None, "YI SYLLABLE VUT", 0x31, "Yi_Syllables"),
    c(0xA0F5, None, "YI SYLLABLE VUX", 0x31, "Yi_Syllables"),
    c(0xA0F6, None, "YI SYLLABLE VU", 0x31, "Yi_Syllables"),
    c(0xA0F7, None, "YI SYLLABLE VUP", 0x31, "Yi_Syllables"),
    c(0xA0F8, None, "YI SYLLABLE VURX", 0x31, "Yi_Syllables"),
    c(0xA0F9, None, "YI SYLLABLE VUR", 0x31, "Yi_Syllables"),
    c(0xA0FA, None, "YI SYLLABLE VYT", 0x31, "Yi_Syllables"),
    c(0xA0FB, None, "YI SYLLABLE VYX", 0x31, "Yi_Syllables"),
    c(0xA0FC, None, "YI SYLLABLE VY", 0x31, "Yi_Syllables"),
    c(0xA0FD, None, "YI SYLLABLE VYP", 0x31, "Yi_Syllables"),
    c(0xA0FE, None, "YI SYLLABLE VYRX", 0x31, "Yi_Syllables"),
    c(0xA0FF, None, "YI SYLLABLE VYR", 0x31, "Yi_Syllables"),
    c(0xA100, None, "YI SYLLABLE DIT", 0x31, "Yi_Syllables"),
    c(0xA101, None, "YI SYLLABLE DIX", 0x31, "Yi_Syllables"),
    c(0xA102, None, "YI SYLLABLE DI", 0x31, "Yi_Syllables"),
    c(0xA103, None, "YI SYLLABLE DIP", 0x31, "Yi_Syllables"),
    c(0xA104, None, "YI SYLLABLE DIEX", 0x31, "Yi_Syllables"),
    c(0xA105, None, "YI SYLLABLE DIE", 0x31, "Yi_Syllables"),
    c(0xA106, None, "YI SYLLABLE DIEP", 0x31, "Yi_Syllables"),
    c(0xA107, None, "YI SYLLABLE DAT", 0x31, "Yi_Syllables"),
    c(0xA108, None, "YI SYLLABLE DAX", 0x31, "Yi_Syllables"),
    c(0xA109, None, "YI SYLLABLE DA", 0x31, "Yi_Syllables"),
    c(0xA10A, None, "YI SYLLABLE DAP", 0x31, "Yi_Syllables"),
    c(0xA10B, None, "YI SYLLABLE DUOX", 0x31, "Yi_Syllables"),
    c(0xA10C, None, "YI SYLLABLE DUO", 0x31, "Yi_Syllables"),
    c(0xA10D, None, "YI SYLLABLE DOT", 0x31, "Yi_Syllables"),
    c(0xA10E, None, "YI SYLLABLE DOX", 0x31, "Yi_Syllables"),
    c(0xA10F, None, "YI SYLLABLE DO", 0x31, "Yi_Syllables"),
    c(0xA110, None, "YI SYLLABLE DOP", 0x31, "Yi_Syllables"),
    c(0xA111, None, "YI SYLLABLE DEX", 0x31, "Yi_Syllables"),
    c(0xA112, None, "YI SYLLABLE DE", 0x31, "Yi_Syllables"),
    c(0xA113, None, "YI SYLLABLE DEP", 0x31, "Yi_Syllables"),
    c(0xA114, None, "YI SYLLABLE DUT", 0x31, "Yi_Syllables"),
    c(0xA115, None, "YI SYLLABLE DUX", 0x31, "Yi_Syllables"),
    c(0xA116, None, "YI SYLLABLE DU", 0x31, "Yi_Syllables"),
    c(0xA117, None, "YI SYLLABLE DUP", 0x31, "Yi_Syllables"),
    c(0xA118, None, "YI SYLLABLE DURX", 0x31, "Yi_Syllables"),
    c(0xA119, None, "YI SYLLABLE DUR", 0x31, "Yi_Syllables"),
    c(0xA11A, None, "YI SYLLABLE TIT", 0x31, "Yi_Syllables"),
    c(0xA11B, None, "YI SYLLABLE TIX", 0x31, "Yi_Syllables"),
    c(0xA11C, None, "YI SYLLABLE TI", 0x31, "Yi_Syllables"),
    c(0xA11D, None, "YI SYLLABLE TIP", 0x31, "Yi_Syllables"),
    c(0xA11E, None, "YI SYLLABLE TIEX", 0x31, "Yi_Syllables"),
    c(0xA11F, None, "YI SYLLABLE TIE", 0x31, "Yi_Syllables"),
    c(0xA120, None, "YI SYLLABLE TIEP", 0x31, "Yi_Syllables"),
    c(0xA121, None, "YI SYLLABLE TAT", 0x31, "Yi_Syllables"),
    c(0xA122, None, "YI SYLLABLE TAX", 0x31, "Yi_Syllables"),
    c(0xA123, None, "YI SYLLABLE TA", 0x31, "Yi_Syllables"),
    c(0xA124, None, "YI SYLLABLE TAP", 0x31, "Yi_Syllables"),
    c(0xA125, None, "YI SYLLABLE TUOT", 0x31, "Yi_Syllables"),
    c(0xA126, None, "YI SYLLABLE TUOX", 0x31, "Yi_Syllables"),
    c(0xA127, None, "YI SYLLABLE TUO", 0x31, "Yi_Syllables"),
    c(0xA128, None, "YI SYLLABLE TUOP", 0x31, "Yi_Syllables"),
    c(0xA129, None, "YI SYLLABLE TOT", 0x31, "Yi_Syllables"),
    c(0xA12A, None, "YI SYLLABLE TOX", 0x31, "Yi_Syllables"),
    c(0xA12B, None, "YI SYLLABLE TO", 0x31, "Yi_Syllables"),
    c(0xA12C, None, "YI SYLLABLE TOP", 0x31, "Yi_Syllables"),
    c(0xA12D, None, "YI SYLLABLE TEX", 0x31, "Yi_Syllables"),
    c(0xA12E, None, "YI SYLLABLE TE", 0x31, "Yi_Syllables"),
    c(0xA12F, None, "YI SYLLABLE TEP", 0x31, "Yi_Syllables"),
    c(0xA130, None, "YI SYLLABLE TUT", 0x31, "Yi_Syllables"),
    c(0xA131, None, "YI SYLLABLE TUX", 0x31, "Yi_Syllables"),
    c(0xA132, None, "YI SYLLABLE TU", 0x31, "Yi_Syllables"),
    c(0xA133, None, "YI SYLLABLE TUP", 0x31, "Yi_Syllables"),
    c(0xA134, None, "YI SYLLABLE TURX", 0x31, "Yi_Syllables"),
    c(0xA135, None, "YI SYLLABLE TUR", 0x31, "Yi_Syllables"),
    c(0xA136, None, "YI SYLLABLE DDIT", 0x31, "Yi_Syllables"),
    c(0xA137, None, "YI SYLLABLE DDIX", 0x31, "Yi_Syllables"),
    c(0xA138, None, "YI SYLLABLE DDI", 0x31, "Yi_Syllables"),
    c(0xA139, None, "YI SYLLABLE DDIP", 0x31, "Yi_Syllables"),
    c(0xA13A, None, "YI SYLLABLE DDIEX", 0x31, "Yi_Syllables"),
    c(0xA13B, None, "YI SYLLABLE DDIE", 0x31, "Yi_Syllables"),
    c(0xA13C, None, "YI SYLLABLE DDIEP", 0x31, "Yi_Syllables"),
    c(0xA13D, None, "YI SYLLABLE DDAT", 0x31, "Yi_Syllables"),
    c(0xA13E, None, "YI SYLLABLE DDAX", 0x31, "Yi_Syllables"),
    c(0xA13F, None, "YI SYLLABLE DDA", 0x31, "Yi_Syllables"),
    c(0xA140, None, "YI SYLLABLE DDAP", 0x31, "Yi_Syllables"),
    c(0xA141, None, "YI SYLLABLE DDUOX", 0x31, "Yi_Syllables"),
    c(0xA142, None, "YI SYLLABLE DDUO", 0x31, "Yi_Syllables"),
    c(0xA143, None, "YI SYLLABLE DDUOP", 0x31, "Yi_Syllables"),
    c(0xA144, None, "YI SYLLABLE DDOT", 0x31, "Yi_Syllables"),
    c(0xA145, None, "YI SYLLABLE DDOX", 0x31, "Yi_Syllables"),
    c(0xA146, None, "YI SYLLABLE DDO", 0x31, "Yi_Syllables"),
    c(0xA147, None, "YI SYLLABLE DDOP", 0x31, "Yi_Syllables"),
    c(0xA148, None, "YI SYLLABLE DDEX", 0x31, "Yi_Syllables"),
    c(0xA149, None, "YI SYLLABLE DDE", 0x31, "Yi_Syllables"),
    c(0xA14A, None, "YI SYLLABLE DDEP", 0x31, "Yi_Syllables"),
    c(0xA14B, None, "YI SYLLABLE DDUT", 0x31, "Yi_Syllables"),
    c(0xA14C, None, "YI SYLLABLE DDUX", 0x31, "Yi_Syllables"),
    c(0xA14D, None, "YI SYLLABLE DDU", 0x31, "Yi_Syllables"),
    c(0xA14E, None, "YI SYLLABLE DDUP", 0x31, "Yi_Syllables"),
    c(0xA14F, None, "YI SYLLABLE DDURX", 0x31, "Yi_Syllables"),
    c(0xA150, None, "YI SYLLABLE DDUR", 0x31, "Yi_Syllables"),
    c(0xA151, None, "YI SYLLABLE NDIT", 0x31, "Yi_Syllables"),
    c(0xA152, None, "YI SYLLABLE NDIX", 0x31, "Yi_Syllables"),
    c(0xA153, None, "YI SYLLABLE NDI", 0x31, "Yi_Syllables"),
    c(0xA154, None, "YI SYLLABLE NDIP", 0x31, "Yi_Syllables"),
    c(0xA155, None, "YI SYLLABLE NDIEX", 0x31, "Yi_Syllables"),
    c(0xA156, None, "YI SYLLABLE NDIE", 0x31, "Yi_Syllables"),
    c(0xA157, None, "YI SYLLABLE NDAT", 0x31, "Yi_Syllables"),
    c(0xA158, None, "YI SYLLABLE NDAX", 0x31, "Yi_Syllables"),
    c(0xA159, None, "YI SYLLABLE NDA", 0x31, "Yi_Syllables"),
    c(0xA15A, None, "YI SYLLABLE NDAP", 0x31, "Yi_Syllables"),
    c(0xA15B, None, "YI SYLLABLE NDOT", 0x31, "Yi_Syllables"),
    c(0xA15C, None, "YI SYLLABLE NDOX", 0x31, "Yi_Syllables"),
    c(0xA15D, None, "YI SYLLABLE NDO", 0x31, "Yi_Syllables"),
    c(0xA15E, None, "YI SYLLABLE NDOP", 0x31, "Yi_Syllables"),
    c(0xA15F, None, "YI SYLLABLE NDEX", 0x31, "Yi_Syllables"),
    c(0xA160, None, "YI SYLLABLE NDE", 0x31, "Yi_Syllables"),
    c(0xA161, None, "YI SYLLABLE NDEP", 0x31, "Yi_Syllables"),
    c(0xA162, None, "YI SYLLABLE NDUT", 0x31, "Yi_Syllables"),
    c(0xA163, None, "YI SYLLABLE NDUX", 0x31, "Yi_Syllables"),
    c(0xA164, None, "YI SYLLABLE NDU", 0x31, "Yi_Syllables"),
    c(0xA165, None, "YI SYLLABLE NDUP", 0x31, "Yi_Syllables"),
    c(0xA166, None, "YI SYLLABLE NDURX", 0x31, "Yi_Syllables"),
    c(0xA167, None, "YI SYLLABLE NDUR", 0x31, "Yi_Syllables"),
    c(0xA168, None, "YI SYLLABLE HNIT", 0x31, "Yi_Syllables"),
    c(0xA169, None, "YI SYLLABLE HNIX", 0x31, "Yi_Syllables"),
    c(0xA16A, None, "YI SYLLABLE HNI", 0x31, "Yi_Syllables"),
    c(0xA16B, None, "YI SYLLABLE HNIP", 0x31, "Yi_Syllables"),
    c(0xA16C, None, "YI SYLLABLE HNIET", 0x31, "Yi_Syllables"),
    c(0xA16D, None, "YI SYLLABLE HNIEX", 0x31, "Yi_Syllables"),
    c(0xA16E, None, "YI SYLLABLE HNIE", 0x31, "Yi_Syllables"),
    c(0xA16F, None, "YI SYLLABLE HNIEP", 0x31, "Yi_Syllables"),
    c(0xA170, None, "YI SYLLABLE HNAT", 0x31, "Yi_Syllables"),
    c(0xA171, None, "YI SYLLABLE HNAX", 0x31, "Yi_Syllables"),
    c(0xA172, None, "YI SYLLABLE HNA", 0x31, "Yi_Syllables"),
    c(0xA173, None, "YI SYLLABLE HNAP", 0x31, "Yi_Syllables"),
    c(0xA174, None, "YI SYLLABLE HNUOX", 0x31, "Yi_Syllables"),
    c(0xA175, None, "YI SYLLABLE HNUO", 0x31, "Yi_Syllables"),
    c(0xA176, None, "YI SYLLABLE HNOT", 0x31, "Yi_Syllables"),
    c(0xA177, None, "YI SYLLABLE HNOX", 0x31, "Yi_Syllables"),
    c(0xA178, None, "YI SYLLABLE HNOP", 0x31, "Yi_Syllables"),
    c(0xA179, None, "YI SYLLABLE HNEX", 0x31, "Yi_Syllables"),
    c(0xA17A, None, "YI SYLLABLE HNE", 0x31, "Yi_Syllables"),
    c(0xA17B, None, "YI SYLLABLE HNEP", 0x31, "Yi_Syllables"),
    c(0xA17C, None, "YI SYLLABLE HNUT", 0x31, "Yi_Syllables"),
    c(0xA17D, None, "YI SYLLABLE NIT", 0x31, "Yi_Syllables"),
    c(0xA17E, None, "YI SYLLABLE NIX", 0x31, "Yi_Syllables"),
    c(0xA17F, None, "YI SYLLABLE NI", 0x31, "Yi_Syllables"),
    c(0xA180, None, "YI SYLLABLE NIP", 0x31, "Yi_Syllables"),
    c(0xA181, None, "YI SYLLABLE NIEX", 0x31, "Yi_Syllables"),
    c(0xA182, None, "YI SYLLABLE NIE", 0x31, "Yi_Syllables"),
    c(0xA183, None, "YI SYLLABLE NIEP", 0x31, "Yi_Syllables"),
    c(0xA184, None, "YI SYLLABLE NAX", 0x31, "Yi_Syllables"),
    c(0xA185, None, "YI SYLLABLE NA", 0x31, "Yi_Syllables"),
    c(0xA186, None, "YI SYLLABLE NAP", 0x31, "Yi_Syllables"),
    c(0xA187, None, "YI SYLLABLE NUOX", 0x31, "Yi_Syllables"),
    c(0xA188, None, "YI SYLLABLE NUO", 0x31, "Yi_Syllables"),
    c(0xA189, None, "YI SYLLABLE NUOP", 0x31, "Yi_Syllables"),
    c(0xA18A, None, "YI SYLLABLE NOT", 0x31, "Yi_Syllables"),
    c(0xA18B, None, "YI SYLLABLE NOX", 0x31, "Yi_Syllables"),
    c(0xA18C, None, "YI SYLLABLE NO", 0x31, "Yi_Syllables"),
    c(0xA18D, None, "YI SYLLABLE NOP", 0x31, "Yi_Syllables"),
    c(0xA18E, None, "YI SYLLABLE NEX", 0x31, "Yi_Syllables"),
    c(0xA18F, None, "YI SYLLABLE NE", 0x31, "Yi_Syllables"),
    c(0xA190, None, "YI SYLLABLE NEP", 0x31, "Yi_Syllables"),
    c(0xA191, None, "YI SYLLABLE NUT", 0x31, "Yi_Syllables"),
    c(0xA192, None, "YI SYLLABLE NUX", 0x31, "Yi_Syllables"),
    c(0xA193, None, "YI SYLLABLE NU", 0x31, "Yi_Syllables"),
    c(0xA194, None, "YI SYLLABLE NUP", 0x31, "Yi_Syllables"),
    c(0xA195, None, "YI SYLLABLE NURX", 0x31, "Yi_Syllables"),
    c(0xA196, None, "YI SYLLABLE NUR", 0x31, "Yi_Syllables"),
    c(0xA197, None, "YI SYLLABLE HLIT", 0x31, "Yi_Syllables"),
    c(0xA198, None, "YI SYLLABLE HLIX", 0x31, "Yi_Syllables"),
    c(0xA199, None, "YI SYLLABLE HLI", 0x31, "Yi_Syllables"),
    c(0xA19A, None, "YI SYLLABLE HLIP", 0x31, "Yi_Syllables"),
    c(0xA19B, None, "YI SYLLABLE HLIEX", 0x31, "Yi_Syllables"),
    c(0xA19C, None, "YI SYLLABLE HLIE", 0x31, "Yi_Syllables"),
    c(0xA19D, None, "YI SYLLABLE HLIEP", 0x31, "Yi_Syllables"),
    c(0xA19E, None, "YI SYLLABLE HLAT", 0x31, "Yi_Syllables"),
    c(0xA19F, None, "YI SYLLABLE HLAX", 0x31, "Yi_Syllables"),
    c(0xA1A0, None, "YI SYLLABLE HLA", 0x31, "Yi_Syllables"),
    c(0xA1A1, None, "YI SYLLABLE HLAP", 0x31, "Yi_Syllables"),
    c(0xA1A2, None, "YI SYLLABLE HLUOX", 0x31, "Yi_Syllables"),
    c(0xA1A3, None, "YI SYLLABLE HLUO", 0x31, "Yi_Syllables"),
    c(0xA1A4, None, "YI SYLLABLE HLUOP", 0x31, "Yi_Syllables"),
    c(0xA1A5, None, "YI SYLLABLE HLOX", 0x31, "Yi_Syllables"),
    c(0xA1A6, None, "YI SYLLABLE HLO", 0x31, "Yi_Syllables"),
    c(0xA1A7, None, "YI SYLLABLE HLOP", 0x31, "Yi_Syllables"),
    c(0xA1A8, None, "YI SYLLABLE HLEX", 0x31, "Yi_Syllables"),
    c(0xA1A9, None, "YI SYLLABLE HLE", 0x31, "Yi_Syllables"),
    c(0xA1AA, None, "YI SYLLABLE HLEP", 0x31, "Yi_Syllables"),
    c(0xA1AB, None, "YI SYLLABLE HLUT", 0x31, "Yi_Syllables"),
    c(0xA1AC, None, "YI SYLLABLE HLUX", 0x31, "Yi_Syllables"),
    c(0xA1AD, None, "YI SYLLABLE HLU", 0x31, "Yi_Syllables"),
    c(0xA1AE, None, "YI SYLLABLE HLUP", 0x31, "Yi_Syllables"),
    c(0xA1AF, None, "YI SYLLABLE HLURX", 0x31, "Yi_Syllables"),
    c(0xA1B0, None, "YI SYLLABLE HLUR", 0x31, "Yi_Syllables"),
    c(0xA1B1, None, "YI SYLLABLE HLYT", 0x31, "Yi_Syllables"),
    c(0xA1B2, None, "YI SYLLABLE HLYX", 0x31, "Yi_Syllables"),
    c(0xA1B3, None, "YI SYLLABLE HLY", 0x31, "Yi_Syllables"),
    c(0xA1B4, None, "YI SYLLABLE HLYP", 0x31, "Yi_Syllables"),
    c(0xA1B5, None, "YI SYLLABLE HLYRX", 0x31, "Yi_Syllables"),
    c(0xA1B6, None, "YI SYLLABLE HLYR", 0x31, "Yi_Syllables"),
    c(0xA1B7, None, "YI SYLLABLE LIT", 0x31, "Yi_Syllables"),
    c(0xA1B8, None, "YI SYLLABLE LIX", 0x31, "Yi_Syllables"),
    c(0xA1B9, None, "YI SYLLABLE LI", 0x31, "Yi_Syllables"),
    c(0xA1BA, None, "YI SYLLABLE LIP", 0x31, "Yi_Syllables"),
    c(0xA1BB, None, "YI SYLLABLE LIET", 0x31, "Yi_Syllables"),
    c(0xA1BC, None, "YI SYLLABLE LIEX", 0x31, "Yi_Syllables"),
    c(0xA1BD, None, "YI SYLLABLE LIE", 0x31, "Yi_Syllables"),
    c(0xA1BE, None, "YI SYLLABLE LIEP", 0x31, "Yi_Syllables"),
    c(0xA1BF, None, "YI SYLLABLE LAT", 0x31, "Yi_Syllables"),
    c(0xA1C0, None, "YI SYLLABLE LAX", 0x31, "Yi_Syllables"),
    c(0xA1C1, None, "YI SYLLABLE LA", 0x31, "Yi_Syllables"),
    c(0xA1C2, None, "YI SYLLABLE LAP", 0x31, "Yi_Syllables"),
    c(0xA1C3, None, "YI SYLLABLE LUOT", 0x31, "Yi_Syllables"),
    c(0xA1C4, None, "YI SYLLABLE LUOX", 0x31, "Yi_Syllables"),
    c(0xA1C5, None, "YI SYLLABLE LUO", 0x31, "Yi_Syllables"),
    c(0xA1C6, None, "YI SYLLABLE LUOP", 0x31, "Yi_Syllables"),
    c(0xA1C7, None, "YI SYLLABLE LOT", 0x31, "Yi_Syllables"),
    c(0xA1C8, None, "YI SYLLABLE LOX", 0x31, "Yi_Syllables"),
    c(0xA1C9, None, "YI SYLLABLE LO", 0x31, "Yi_Syllables"),
    c(0xA1CA, None, "YI SYLLABLE LOP", 0x31, "Yi_Syllables"),
    c(0xA1CB, None, "YI SYLLABLE LEX", 0x31, "Yi_Syllables"),
    c(0xA1CC, None, "YI SYLLABLE LE", 0x31, "Yi_Syllables"),
    c(0xA1CD, None, "YI SYLLABLE LEP", 0x31, "Yi_Syllables"),
    c(0xA1CE, None, "YI SYLLABLE LUT", 0x31, "Yi_Syllables"),
    c(0xA1CF, None, "YI SYLLABLE LUX", 0x31, "Yi_Syllables"),
    c(0xA1D0, None, "YI SYLLABLE LU", 0x31, "Yi_Syllables"),
    c(0xA1D1, None, "YI SYLLABLE LUP", 0x31, "Yi_Syllables"),
    c(0xA1D2, None, "YI SYLLABLE LURX", 0x31, "Yi_Syllables"),
    c(0xA1D3, None, "YI SYLLABLE LUR", 0x31, "Yi_Syllables"),
    c(0xA1D4, None, "YI SYLLABLE LYT", 0x31, "Yi_Syllables"),
    c(0xA1D5, None, "YI SYLLABLE LYX", 0x31, "Yi_Syllables"),
    c(0xA1D6, None, "YI SYLLABLE LY", 0x31, "Yi_Syllables"),
    c(0xA1D7, None, "YI SYLLABLE LYP", 0x31, "Yi_Syllables"),
    c(0xA1D8, None, "YI SYLLABLE LYRX", 0x31, "Yi_Syllables"),
    c(0xA1D9, None, "YI SYLLABLE LYR", 0x31, "Yi_Syllables"),
    c(0xA1DA, None, "YI SYLLABLE GIT", 0x31, "Yi_Syllables"),
    c(0xA1DB, None, "YI SYLLABLE GIX", 0x31, "Yi_Syllables"),
    c(0xA1DC, None, "YI SYLLABLE GI", 0x31, "Yi_Syllables"),
    c(0xA1DD, None, "YI SYLLABLE GIP", 0x31, "Yi_Syllables"),
    c(0xA1DE, None, "YI SYLLABLE GIET", 0x31, "Yi_Syllables"),
    c(0xA1DF, None, "YI SYLLABLE GIEX", 0x31, "Yi_Syllables"),
    c(0xA1E0, None, "YI SYLLABLE GIE", 0x31, "Yi_Syllables"),
    c(0xA1E1, None, "YI SYLLABLE GIEP", 0x31, "Yi_Syllables"),
    c(0xA1E2, None, "YI SYLLABLE GAT", 0x31, "Yi_Syllables"),
    c(0xA1E3, None, "YI SYLLABLE GAX", 0x31, "Yi_Syllables"),
    c(0xA1E4, None, "YI SYLLABLE GA", 0x31, "Yi_Syllables"),
    c(0xA1E5, None, "YI SYLLABLE GAP", 0x31, "Yi_Syllables"),
    c(0xA1E6, None, "YI SYLLABLE GUOT", 0x31, "Yi_Syllables"),
    c(0xA1E7, None, "YI SYLLABLE GUOX", 0x31, "Yi_Syllables"),
    c(0xA1E8, None, "YI SYLLABLE GUO", 0x31, "Yi_Syllables"),
    c(0xA1E9, None, "YI SYLLABLE GUOP", 0x31, "Yi_Syllables"),
    c(0xA1EA, None, "YI SYLLABLE GOT", 0x31, "Yi_Syllables"),
    c(0xA1EB, None, "YI SYLLABLE GOX", 0x31, "Yi_Syllables"),
    c(0xA1EC, None, "YI SYLLABLE GO", 0x31, "Yi_Syllables"),
    c(0xA1ED, None, "YI SYLLABLE GOP", 0x31, "Yi_Syllables"),
    c(0xA1EE, None, "YI SYLLABLE GET", 0x31, "Yi_Syllables"),
    c(0xA1EF, None, "YI SYLLABLE GEX", 0x31, "Yi_Syllables"),
    c(0xA1F0, None, "YI SYLLABLE GE", 0x31, "Yi_Syllables"),
    c(0xA1F1, None, "YI SYLLABLE GEP", 0x31, "Yi_Syllables"),
    c(0xA1F2, None, "YI SYLLABLE GUT", 0x31, "Yi_Syllables"),
    c(0xA1F3, None, "YI SYLLABLE GUX", 0x31, "Yi_Syllables"),
    c(0xA1F4, None, "YI SYLLABLE GU", 0x31, "Yi_Syllables"),
    c(0xA1F5, None, "YI SYLLABLE GUP", 0x31, "Yi_Syllables"),
    c(0xA1F6, None, "YI SYLLABLE GURX", 0x31, "Yi_Syllables"),
    c(0xA1F7, None, "YI SYLLABLE GUR", 0x31, "Yi_Syllables"),
    c(0xA1F8, None, "YI SYLLABLE KIT", 0x31, "Yi_Syllables"),
    c(0xA1F9, None, "YI SYLLABLE KIX", 0x31, "Yi_Syllables"),
    c(0xA1FA, None, "YI SYLLABLE KI", 0x31, "Yi_Syllables"),
    c(0xA1FB, None, "YI SYLLABLE KIP", 0x31, "Yi_Syllables"),
    c(0xA1FC, None, "YI SYLLABLE KIEX", 0x31, "Yi_Syllables"),
    c(0xA1FD, None, "YI SYLLABLE KIE", 0x31, "Yi_Syllables"),
    c(0xA1FE, None, "YI SYLLABLE KIEP", 0x31, "Yi_Syllables"),
    c(0xA1FF, None, "YI SYLLABLE KAT", 0x31, "Yi_Syllables"),
    c(0xA200, None, "YI SYLLABLE KAX", 0x31, "Yi_Syllables"),
    c(0xA201, None, "YI SYLLABLE KA", 0x31, "Yi_Syllables"),
    c(0xA202, None, "YI SYLLABLE KAP", 0x31, "Yi_Syllables"),
    c(0xA203, None, "YI SYLLABLE KUOX", 0x31, "Yi_Syllables"),
    c(0xA204, None, "YI SYLLABLE KUO", 0x31, "Yi_Syllables"),
    c(0xA205, None, "YI SYLLABLE KUOP", 0x31, "Yi_Syllables"),
    c(0xA206, None, "YI SYLLABLE KOT", 0x31, "Yi_Syllables"),
    c(0xA207, None, "YI SYLLABLE KOX", 0x31, "Yi_Syllables"),
    c(0xA208, None, "YI SYLLABLE KO", 0x31, "Yi_Syllables"),
    c(0xA209, None, "YI SYLLABLE KOP", 0x31, "Yi_Syllables"),
    c(0xA20A, None, "YI SYLLABLE KET", 0x31, "Yi_Syllables"),
    c(0xA20B, None, "YI SYLLABLE KEX", 0x31, "Yi_Syllables"),
    c(0xA20C, None, "YI SYLLABLE KE", 0x31, "Yi_Syllables"),
    c(0xA20D, None, "YI SYLLABLE KEP", 0x31, "Yi_Syllables"),
    c(0xA20E, None, "YI SYLLABLE KUT", 0x31, "Yi_Syllables"),
    c(0xA20F, None, "YI SYLLABLE KUX", 0x31, "Yi_Syllables"),
    c(0xA210, None, "YI SYLLABLE KU", 0x31, "Yi_Syllables"),
    c(0xA211, None, "YI SYLLABLE KUP", 0x31, "Yi_Syllables"),
    c(0xA212, None, "YI SYLLABLE KURX", 0x31, "Yi_Syllables"),
    c(0xA213, None, "YI SYLLABLE KUR", 0x31, "Yi_Syllables"),
    c(0xA214, None, "YI SYLLABLE GGIT", 0x31, "Yi_Syllables"),
    c(0xA215, None, "YI SYLLABLE GGIX", 0x31, "Yi_Syllables"),
    c(0xA216, None, "YI SYLLABLE GGI", 0x31, "Yi_Syllables"),
    c(0xA217, None, "YI SYLLABLE GGIEX", 0x31, "Yi_Syllables"),
    c(0xA218, None, "YI SYLLABLE GGIE", 0x31, "Yi_Syllables"),
    c(0xA219, None, "YI SYLLABLE GGIEP", 0x31, "Yi_Syllables"),
    c(0xA21A, None, "YI SYLLABLE GGAT", 0x31, "Yi_Syllables"),
    c(0xA21B, None, "YI SYLLABLE GGAX", 0x31, "Yi_Syllables"),
    c(0xA21C, None, "YI SYLLABLE GGA", 0x31, "Yi_Syllables"),
    c(0xA21D, None, "YI SYLLABLE GGAP", 0x31, "Yi_Syllables"),
    c(0xA21E, None, "YI SYLLABLE GGUOT", 0x31, "Yi_Syllables"),
    c(0xA21F, None, "YI SYLLABLE GGUOX", 0x31, "Yi_Syllables"),
    c(0xA220, None, "YI SYLLABLE GGUO", 0x31, "Yi_Syllables"),
    c(0xA221, None, "YI SYLLABLE GGUOP", 0x31, "Yi_Syllables"),
    c(0xA222, None, "YI SYLLABLE GGOT", 0x31, "Yi_Syllables"),
    c(0xA223, None, "YI SYLLABLE GGOX", 0x31, "Yi_Syllables"),
    c(0xA224, None, "YI SYLLABLE GGO", 0x31, "Yi_Syllables"),
    c(0xA225, None, "YI SYLLABLE GGOP", 0x31, "Yi_Syllables"),
    c(0xA226, None, "YI SYLLABLE GGET", 0x31, "Yi_Syllables"),
    c(0xA227, None, "YI SYLLABLE GGEX", 0x31, "Yi_Syllables"),
    c(0xA228, None, "YI SYLLABLE GGE", 0x31, "Yi_Syllables"),
    c(0xA229, None, "YI SYLLABLE GGEP", 0x31, "Yi_Syllables"),
    c(0xA22A, None, "YI SYLLABLE GGUT", 0x31, "Yi_Syllables"),
    c(0xA22B, None, "YI SYLLABLE GGUX", 0x31, "Yi_Syllables"),
    c(0xA22C, None, "YI SYLLABLE GGU", 0x31, "Yi_Syllables"),
    c(0xA22D, None, "YI SYLLABLE GGUP", 0x31, "Yi_Syllables"),
    c(0xA22E, None, "YI SYLLABLE GGURX", 0x31, "Yi_Syllables"),
    c(0xA22F, None, "YI SYLLABLE GGUR", 0x31, "Yi_Syllables"),
    c(0xA230, None, "YI SYLLABLE MGIEX", 0x31, "Yi_Syllables"),
    c(0xA231, None, "YI SYLLABLE MGIE", 0x31, "Yi_Syllables"),
    c(0xA232, None, "YI SYLLABLE MGAT", 0x31, "Yi_Syllables"),
    c(0xA233, None, "YI SYLLABLE MGAX", 0x31, "Yi_Syllables"),
    c(0xA234, None, "YI SYLLABLE MGA", 0x31, "Yi_Syllables"),
    c(0xA235, None, "YI SYLLABLE MGAP", 0x31, "Yi_Syllables"),
    c(0xA236, None, "YI SYLLABLE MGUOX", 0x31, "Yi_Syllables"),
    c(0xA237, None, "YI SYLLABLE MGUO", 0x31, "Yi_Syllables"),
    c(0xA238, None, "YI SYLLABLE MGUOP", 0x31, "Yi_Syllables"),
    c(0xA239, None, "YI SYLLABLE MGOT", 0x31, "Yi_Syllables"),
    c(0xA23A, None, "YI SYLLABLE MGOX", 0x31, "Yi_Syllables"),
    c(0xA23B, None, "YI SYLLABLE MGO", 0x31, "Yi_Syllables"),
    c(0xA23C, None, "YI SYLLABLE MGOP", 0x31, "Yi_Syllables"),
    c(0xA23D, None, "YI SYLLABLE MGEX", 0x31, "Yi_Syllables"),
    c(0xA23E, None, "YI SYLLABLE MGE", 0x31, "Yi_Syllables"),
    c(0xA23F, None, "YI SYLLABLE MGEP", 0x31, "Yi_Syllables"),
    c(0xA240, None, "YI SYLLABLE MGUT", 0x31, "Yi_Syllables"),
    c(0xA241, None, "YI SYLLABLE MGUX", 0x31, "Yi_Syllables"),
    c(0xA242, None, "YI SYLLABLE MGU", 0x31, "Yi_Syllables"),
    c(0xA243, None, "YI SYLLABLE MGUP", 0x31, "Yi_Syllables"),
    c(0xA244, None, "YI SYLLABLE MGURX", 0x31, "Yi_Syllables"),
    c(0xA245, None, "YI SYLLABLE MGUR", 0x31, "Yi_Syllables"),
    c(0xA246, None, "YI SYLLABLE HXIT", 0x31, "Yi_Syllables"),
    c(0xA247, None, "YI SYLLABLE HXIX", 0x31, "Yi_Syllables"),
    c(0xA248, None, "YI SYLLABLE HXI", 0x31, "Yi_Syllables"),
    c(0xA249, None, "YI SYLLABLE HXIP", 0x31, "Yi_Syllables"),
    c(0xA24A, None, "YI SYLLABLE HXIET", 0x31, "Yi_Syllables"),
    c(0xA24B, None, "YI SYLLABLE HXIEX", 0x31, "Yi_Syllables"),
    c(0xA24C, None, "YI SYLLABLE HXIE", 0x31, "Yi_Syllables"),
    c(0xA24D, None, "YI SYLLABLE HXIEP", 0x31, "Yi_Syllables"),
    c(0xA24E, None, "YI SYLLABLE HXAT", 0x31, "Yi_Syllables"),
    c(0xA24F, None, "YI SYLLABLE HXAX", 0x31, "Yi_Syllables"),
    c(0xA250, None, "YI SYLLABLE HXA", 0x31, "Yi_Syllables"),
    c(0xA251, None, "YI SYLLABLE HXAP", 0x31, "Yi_Syllables"),
    c(0xA252, None, "YI SYLLABLE HXUOT", 0x31, "Yi_Syllables"),
    c(0xA253, None, "YI SYLLABLE HXUOX", 0x31, "Yi_Syllables"),
    c(0xA254, None, "YI SYLLABLE HXUO", 0x31, "Yi_Syllables"),
    c(0xA255, None, "YI SYLLABLE HXUOP", 0x31, "Yi_Syllables"),
    c(0xA256, None, "YI SYLLABLE HXOT", 0x31, "Yi_Syllables"),
    c(0xA257, None, "YI SYLLABLE HXOX", 0x31, "Yi_Syllables"),
    c(0xA258, None, "YI SYLLABLE HXO", 0x31, "Yi_Syllables"),
    c(0xA259, None, "YI SYLLABLE HXOP", 0x31, "Yi_Syllables"),
    c(0xA25A, None, "YI SYLLABLE HXEX", 0x31, "Yi_Syllables"),
    c(0xA25B, None, "YI SYLLABLE HXE", 0x31, "Yi_Syllables"),
    c(0xA25C, None, "YI SYLLABLE HXEP", 0x31, "Yi_Syllables"),
    c(0xA25D, None, "YI SYLLABLE NGIEX", 0x31, "Yi_Syllables"),
    c(0xA25E, None, "YI SYLLABLE NGIE", 0x31, "Yi_Syllables"),
    c(0xA25F, None, "YI SYLLABLE NGIEP", 0x31, "Yi_Syllables"),
    c(0xA260, None, "YI SYLLABLE NGAT", 0x31, "Yi_Syllables"),
    c(0xA261, None, "YI SYLLABLE NGAX", 0x31, "Yi_Syllables"),
    c(0xA262, None, "YI SYLLABLE NGA", 0x31, "Yi_Syllables"),
    c(0xA263, None, "YI SYLLABLE NGAP", 0x31, "Yi_Syllables"),
    c(0xA264, None, "YI SYLLABLE NGUOT", 0x31, "Yi_Syllables"),
    c(0xA265, None, "YI SYLLABLE NGUOX", 0x31, "Yi_Syllables"),
    c(0xA266, None, "YI SYLLABLE NGUO", 0x31, "Yi_Syllables"),
    c(0xA267, None, "YI SYLLABLE NGOT", 0x31, "Yi_Syllables"),
    c(0xA268, None, "YI SYLLABLE NGOX", 0x31, "Yi_Syllables"),
    c(0xA269, None, "YI SYLLABLE NGO", 0x31, "Yi_Syllables"),
    c(0xA26A, None, "YI SYLLABLE NGOP", 0x31, "Yi_Syllables"),
    c(0xA26B, None, "YI SYLLABLE NGEX", 0x31, "Yi_Syllables"),
    c(0xA26C, None, "YI SYLLABLE NGE", 0x31, "Yi_Syllables"),
    c(0xA26D, None, "YI SYLLABLE NGEP", 0x31, "Yi_Syllables"),
    c(0xA26E, None, "YI SYLLABLE HIT", 0x31, "Yi_Syllables"),
    c(0xA26F, None, "YI SYLLABLE HIEX", 0x31, "Yi_Syllables"),
    c(0xA270, None, "YI SYLLABLE HIE", 0x31, "Yi_Syllables"),
    c(0xA271, None, "YI SYLLABLE HAT", 0x31, "Yi_Syllables"),
    c(0xA272, None, "YI SYLLABLE HAX", 0x31, "Yi_Syllables"),
    c(0xA273, None, "YI SYLLABLE HA", 0x31, "Yi_Syllables"),
    c(0xA274, None, "YI SYLLABLE HAP", 0x31, "Yi_Syllables"),
    c(0xA275, None, "YI SYLLABLE HUOT", 0x31, "Yi_Syllables"),
    c(0xA276, None, "YI SYLLABLE HUOX", 0x31, "Yi_Syllables"),
    c(0xA277, None, "YI SYLLABLE HUO", 0x31, "Yi_Syllables"),
    c(0xA278, None, "YI SYLLABLE HUOP", 0x31, "Yi_Syllables"),
    c(0xA279, None, "YI SYLLABLE HOT", 0x31, "Yi_Syllables"),
    c(0xA27A, None, "YI SYLLABLE HOX", 0x31, "Yi_Syllables"),
    c(0xA27B, None, "YI SYLLABLE HO", 0x31, "Yi_Syllables"),
    c(0xA27C, None, "YI SYLLABLE HOP", 0x31, "Yi_Syllables"),
    c(0xA27D, None, "YI SYLLABLE HEX", 0x31, "Yi_Syllables"),
    c(0xA27E, None, "YI SYLLABLE HE", 0x31, "Yi_Syllables"),
    c(0xA27F, None, "YI SYLLABLE HEP", 0x31, "Yi_Syllables"),
    c(0xA280, None, "YI SYLLABLE WAT", 0x31, "Yi_Syllables"),
    c(0xA281, None, "YI SYLLABLE WAX", 0x31, "Yi_Syllables"),
    c(0xA282, None, "YI SYLLABLE WA", 0x31, "Yi_Syllables"),
    c(0xA283, None, "YI SYLLABLE WAP", 0x31, "Yi_Syllables"),
    c(0xA284, None, "YI SYLLABLE WUOX", 0x31, "Yi_Syllables"),
    c(0xA285, None, "YI SYLLABLE WUO", 0x31, "Yi_Syllables"),
    c(0xA286, None, "YI SYLLABLE WUOP", 0x31, "Yi_Syllables"),
    c(0xA287, None, "YI SYLLABLE WOX", 0x31, "Yi_Syllables"),
    c(0xA288, None, "YI SYLLABLE WO", 0x31, "Yi_Syllables"),
    c(0xA289, None, "YI SYLLABLE WOP", 0x31, "Yi_Syllables"),
    c(0xA28A, None, "YI SYLLABLE WEX", 0x31, "Yi_Syllables"),
    c(0xA28B, None, "YI SYLLABLE WE", 0x31, "Yi_Syllables"),
    c(0xA28C, None, "YI SYLLABLE WEP", 0x31, "Yi_Syllables"),
    c(0xA28D, None, "YI SYLLABLE ZIT", 0x31, "Yi_Syllables"),
    c(0xA28E, None, "YI SYLLABLE ZIX", 0x31, "Yi_Syllables"),
    c(0xA28F, None, "YI SYLLABLE ZI", 0x31, "Yi_Syllables"),
    c(0xA290, None, "YI SYLLABLE ZIP", 0x31, "Yi_Syllables"),
    c(0xA291, None, "YI SYLLABLE ZIEX", 0x31, "Yi_Syllables"),
    c(0xA292, None, "YI SYLLABLE ZIE", 0x31, "Yi_Syllables"),
    c(0xA293, None, "YI SYLLABLE ZIEP", 0x31, "Yi_Syllables"),
    c(0xA294, None, "YI SYLLABLE ZAT", 0x31, "Yi_Syllables"),
    c(0xA295, None, "YI SYLLABLE ZAX", 0x31, "Yi_Syllables"),
    c(0xA296, None, "YI SYLLABLE ZA", 0x31, "Yi_Syllables"),
    c(0xA297, None, "YI SYLLABLE ZAP", 0x31, "Yi_Syllables"),
    c(0xA298, None, "YI SYLLABLE ZUOX", 0x31, "Yi_Syllables"),
    c(0xA299, None, "YI SYLLABLE ZUO", 0x31, "Yi_Syllables"),
    c(0xA29A, None, "YI SYLLABLE ZUOP", 0x31, "Yi_Syllables"),
    c(0xA29B, None, "YI SYLLABLE ZOT", 0x31, "Yi_Syllables"),
    c(0xA29C, None, "YI SYLLABLE ZOX", 0x31, "Yi_Syllables"),
    c(0xA29D, None, "YI SYLLABLE ZO", 0x31, "Yi_Syllables"),
    c(0xA29E, None, "YI SYLLABLE ZOP", 0x31, "Yi_Syllables"),
    c(0xA29F, None, "YI SYLLABLE ZEX", 0x31, "Yi_Syllables"),
    c(0xA2A0, None, "YI SYLLABLE ZE", 0x31, "Yi_Syllables"),
    c(0xA2A1, None, "YI SYLLABLE ZEP", 0x31, "Yi_Syllables"),
    c(0xA2A2, None, "YI SYLLABLE ZUT", 0x31, "Yi_Syllables"),
    c(0xA2A3, None, "YI SYLLABLE ZUX", 0x31, "Yi_Syllables"),
    c(0xA2A4, None, "YI SYLLABLE ZU", 0x31, "Yi_Syllables"),
    c(0xA2A5, None, "YI SYLLABLE ZUP", 0x31, "Yi_Syllables"),
    c(0xA2A6, None, "YI SYLLABLE ZURX", 0x31, "Yi_Syllables"),
    c(0xA2A7, None, "YI SYLLABLE ZUR", 0x31, "Yi_Syllables"),
    c(0xA2A8, None, "YI SYLLABLE ZYT", 0x31, "Yi_Syllables"),
    c(0xA2A9, None, "YI SYLLABLE ZYX", 0x31, "Yi_Syllables"),
    c(0xA2AA, None, "YI SYLLABLE ZY", 0x31, "Yi_Syllables"),
    c(0xA2AB, None, "YI SYLLABLE ZYP", 0x31, "Yi_Syllables"),
    c(0xA2AC, None, "YI SYLLABLE ZYRX", 0x31, "Yi_Syllables"),
    c(0xA2AD, None, "YI SYLLABLE ZYR", 0x31, "Yi_Syllables"),
    c(0xA2AE, None, "YI SYLLABLE CIT", 0x31, "Yi_Syllables"),
    c(0xA2AF, None, "YI SYLLABLE CIX", 0x31, "Yi_Syllables"),
    c(0xA2B0, None, "YI SYLLABLE CI", 0x31, "Yi_Syllables"),
    c(0xA2B1, None, "YI SYLLABLE CIP", 0x31, "Yi_Syllables"),
    c(0xA2B2, None, "YI SYLLABLE CIET", 0x31, "Yi_Syllables"),
    c(0xA2B3, None, "YI SYLLABLE CIEX", 0x31, "Yi_Syllables"),
    c(0xA2B4, None, "YI SYLLABLE CIE", 0x31, "Yi_Syllables"),
    c(0xA2B5, None, "YI SYLLABLE CIEP", 0x31, "Yi_Syllables"),
    c(0xA2B6, None, "YI SYLLABLE CAT", 0x31, "Yi_Syllables"),
    c(0xA2B7, None, "YI SYLLABLE CAX", 0x31, "Yi_Syllables"),
    c(0xA2B8, None, "YI SYLLABLE CA", 0x31, "Yi_Syllables"),
    c(0xA2B9, None, "YI SYLLABLE CAP", 0x31, "Yi_Syllables"),
    c(0xA2BA, None, "YI SYLLABLE CUOX", 0x31, "Yi_Syllables"),
    c(0xA2BB, None, "YI SYLLABLE CUO", 0x31, "Yi_Syllables"),
    c(0xA2BC, None, "YI SYLLABLE CUOP", 0x31, "Yi_Syllables"),
    c(0xA2BD, None, "YI SYLLABLE COT", 0x31, "Yi_Syllables"),
    c(0xA2BE, None, "YI SYLLABLE COX", 0x31, "Yi_Syllables"),
    c(0xA2BF, None, "YI SYLLABLE CO", 0x31, "Yi_Syllables"),
    c(0xA2C0, None, "YI SYLLABLE COP", 0x31, "Yi_Syllables"),
    c(0xA2C1, None, "YI SYLLABLE CEX", 0x31, "Yi_Syllables"),
    c(0xA2C2, None, "YI SYLLABLE CE", 0x31, "Yi_Syllables"),
    c(0xA2C3, None, "YI SYLLABLE CEP", 0x31, "Yi_Syllables"),
    c(0xA2C4, None, "YI SYLLABLE CUT", 0x31, "Yi_Syllables"),
    c(0xA2C5, None, "YI SYLLABLE CUX", 0x31, "Yi_Syllables"),
    c(0xA2C6, None, "YI SYLLABLE CU", 0x31, "Yi_Syllables"),
    c(0xA2C7, None, "YI SYLLABLE CUP", 0x31, "Yi_Syllables"),
    c(0xA2C8, None, "YI SYLLABLE CURX", 0x31, "Yi_Syllables"),
    c(0xA2C9, None, "YI SYLLABLE CUR", 0x31, "Yi_Syllables"),
    c(0xA2CA, None, "YI SYLLABLE CYT", 0x31, "Yi_Syllables"),
    c(0xA2CB, None, "YI SYLLABLE CYX", 0x31, "Yi_Syllables"),
    c(0xA2CC, None, "YI SYLLABLE CY", 0x31, "Yi_Syllables"),
    c(0xA2CD, None, "YI SYLLABLE CYP", 0x31, "Yi_Syllables"),
    c(0xA2CE, None, "YI SYLLABLE CYRX", 0x31, "Yi_Syllables"),
    c(0xA2CF, None, "YI SYLLABLE CYR", 0x31, "Yi_Syllables"),
    c(0xA2D0, None, "YI SYLLABLE ZZIT", 0x31, "Yi_Syllables"),
    c(0xA2D1, None, "YI SYLLABLE ZZIX", 0x31, "Yi_Syllables"),
    c(0xA2D2, None, "YI SYLLABLE ZZI", 0x31, "Yi_Syllables"),
    c(0xA2D3, None, "YI SYLLABLE ZZIP", 0x31, "Yi_Syllables"),
    c(0xA2D4, None, "YI SYLLABLE ZZIET", 0x31, "Yi_Syllables"),
    c(0xA2D5, None, "YI SYLLABLE ZZIEX", 0x31, "Yi_Syllables"),
    c(0xA2D6, None, "YI SYLLABLE ZZIE", 0x31, "Yi_Syllables"),
    c(0xA2D7, None, "YI SYLLABLE ZZIEP", 0x31, "Yi_Syllables"),
    c(0xA2D8, None, "YI SYLLABLE ZZAT", 0x31, "Yi_Syllables"),
    c(0xA2D9, None, "YI SYLLABLE ZZAX", 0x31, "Yi_Syllables"),
    c(0xA2DA, None, "YI SYLLABLE ZZA", 0x31, "Yi_Syllables"),
    c(0xA2DB, None, "YI SYLLABLE ZZAP", 0x31, "Yi_Syllables"),
    c(0xA2DC, None, "YI SYLLABLE ZZOX", 0x31, "Yi_Syllables"),
    c(0xA2DD, None, "YI SYLLABLE ZZO", 0x31, "Yi_Syllables"),
    c(0xA2DE, None, "YI SYLLABLE ZZOP", 0x31, "Yi_Syllables"),
    c(0xA2DF, None, "YI SYLLABLE ZZEX", 0x31, "Yi_Syllables"),
    c(0xA2E0, None, "YI SYLLABLE ZZE", 0x31, "Yi_Syllables"),
    c(0xA2E1, None, "YI SYLLABLE ZZEP", 0x31, "Yi_Syllables"),
    c(0xA2E2, None, "YI SYLLABLE ZZUX", 0x31, "Yi_Syllables"),
    c(0xA2E3, None, "YI SYLLABLE ZZU", 0x31, "Yi_Syllables"),
    c(0xA2E4, None, "YI SYLLABLE ZZUP", 0x31, "Yi_Syllables"),
    c(0xA2E5, None, "YI SYLLABLE ZZURX", 0x31, "Yi_Syllables"),
    c(0xA2E6, None, "YI SYLLABLE ZZUR", 0x31, "Yi_Syllables"),
    c(0xA2E7, None, "YI SYLLABLE ZZYT", 0x31, "Yi_Syllables"),
    c(0xA2E8, None, "YI SYLLABLE ZZYX", 0x31, "Yi_Syllables"),
    c(0xA2E9, None, "YI SYLLABLE ZZY", 0x31, "Yi_Syllables"),
    c(0xA2EA, None, "YI SYLLABLE ZZYP", 0x31, "Yi_Syllables"),
    c(0xA2EB, None, "YI SYLLABLE ZZYRX", 0x31, "Yi_Syllables"),
    c(0xA2EC, None, "YI SYLLABLE ZZYR", 0x31, "Yi_Syllables"),
    c(0xA2ED, None, "YI SYLLABLE NZIT", 0x31, "Yi_Syllables"),
    c(0xA2EE, None, "YI SYLLABLE NZIX", 0x31, "Yi_Syllables"),
    c(0xA2EF, None, "YI SYLLABLE NZI", 0x31, "Yi_Syllables"),
    c(0xA2F0, None, "YI SYLLABLE NZIP", 0x31, "Yi_Syllables"),
    c(0xA2F1, None, "YI SYLLABLE NZIEX", 0x31, "Yi_Syllables"),
    c(0xA2F2, None, "YI SYLLABLE NZIE", 0x31, "Yi_Syllables"),
    c(0xA2F3, None, "YI SYLLABLE NZIEP", 0x31, "Yi_Syllables"),
    c(0xA2F4, None, "YI SYLLABLE NZAT", 0x31, "Yi_Syllables"),
    c(0xA2F5, None, "YI SYLLABLE NZAX", 0x31, "Yi_Syllables"),
    c(0xA2F6, None, "YI SYLLABLE NZA", 0x31, "Yi_Syllables"),
    c(0xA2F7, None, "YI SYLLABLE NZAP", 0x31, "Yi_Syllables"),
    c(0xA2F8, None, "YI SYLLABLE NZUOX", 0x31, "Yi_Syllables"),
    c(0xA2F9, None, "YI SYLLABLE NZUO", 0x31, "Yi_Syllables"),
    c(0xA2FA, None, "YI SYLLABLE NZOX", 0x31, "Yi_Syllables"),
    c(0xA2FB, None, "YI SYLLABLE NZOP", 0x31, "Yi_Syllables"),
    c(0xA2FC, None, "YI SYLLABLE NZEX", 0x31, "Yi_Syllables"),
    c(0xA2FD, None, "YI SYLLABLE NZE", 0x31, "Yi_Syllables"),
    c(0xA2FE, None, "YI SYLLABLE NZUX", 0x31, "Yi_Syllables"),
    c(0xA2FF, None, "YI SYLLABLE NZU", 0x31, "Yi_Syllables"),
    c(0xA300, None, "YI SYLLABLE NZUP", 0x31, "Yi_Syllables"),
    c(0xA301, None, "YI SYLLABLE NZURX", 0x31, "Yi_Syllables"),
    c(0xA302, None, "YI SYLLABLE NZUR", 0x31, "Yi_Syllables"),
    c(0xA303, None, "YI SYLLABLE NZYT", 0x31, "Yi_Syllables"),
    c(0xA304, None, "YI SYLLABLE NZYX", 0x31, "Yi_Syllables"),
    c(0xA305, None, "YI SYLLABLE NZY", 0x31, "Yi_Syllables"),
    c(0xA306, None, "YI SYLLABLE NZYP", 0x31, "Yi_Syllables"),
    c(0xA307, None, "YI SYLLABLE NZYRX", 0x31, "Yi_Syllables"),
    c(0xA308, None, "YI SYLLABLE NZYR", 0x31, "Yi_Syllables"),
    c(0xA309, None, "YI SYLLABLE SIT", 0x31, "Yi_Syllables"),
    c(0xA30A, None, "YI SYLLABLE SIX", 0x31, "Yi_Syllables"),
    c(0xA30B, None, "YI SYLLABLE SI", 0x31, "Yi_Syllables"),
    c(0xA30C, None, "YI SYLLABLE SIP", 0x31, "Yi_Syllables"),
    c(0xA30D, None, "YI SYLLABLE SIEX", 0x31, "Yi_Syllables"),
    c(0xA30E, None, "YI SYLLABLE SIE", 0x31, "Yi_Syllables"),
    c(0xA30F, None, "YI SYLLABLE SIEP", 0x31, "Yi_Syllables"),
    c(0xA310, None, "YI SYLLABLE SAT", 0x31, "Yi_Syllables"),
    c(0xA311, None, "YI SYLLABLE SAX", 0x31, "Yi_Syllables"),
    c(0xA312, None, "YI SYLLABLE SA", 0x31, "Yi_Syllables"),
    c(0xA313, None, "YI SYLLABLE SAP", 0x31, "Yi_Syllables"),
    c(0xA314, None, "YI SYLLABLE SUOX", 0x31, "Yi_Syllables"),
    c(0xA315, None, "YI SYLLABLE SUO", 0x31, "Yi_Syllables"),
    c(0xA316, None, "YI SYLLABLE SUOP", 0x31, "Yi_Syllables"),
    c(0xA317, None, "YI SYLLABLE SOT", 0x31, "Yi_Syllables"),
    c(0xA318, None, "YI SYLLABLE SOX", 0x31, "Yi_Syllables"),
    c(0xA319, None, "YI SYLLABLE SO", 0x31, "Yi_Syllables"),
    c(0xA31A, None, "YI SYLLABLE SOP", 0x31, "Yi_Syllables"),
    c(0xA31B, None, "YI SYLLABLE SEX", 0x31, "Yi_Syllables"),
    c(0xA31C, None, "YI SYLLABLE SE", 0x31, "Yi_Syllables"),
    c(0xA31D, None, "YI SYLLABLE SEP", 0x31, "Yi_Syllables"),
    c(0xA31E, None, "YI SYLLABLE SUT", 0x31, "Yi_Syllables"),
    c(0xA31F, None, "YI SYLLABLE SUX", 0x31, "Yi_Syllables"),
    c(0xA320, None, "YI SYLLABLE SU", 0x31, "Yi_Syllables"),
    c(0xA321, None, "YI SYLLABLE SUP", 0x31, "Yi_Syllables"),
    c(0xA322, None, "YI SYLLABLE SURX", 0x31, "Yi_Syllables"),
    c(0xA323, None, "YI SYLLABLE SUR", 0x31, "Yi_Syllables"),
    c(0xA324, None, "YI SYLLABLE SYT", 0x31, "Yi_Syllables"),
    c(0xA325, None, "YI SYLLABLE SYX", 0x31, "Yi_Syllables"),
    c(0xA326, None, "YI SYLLABLE SY", 0x31, "Yi_Syllables"),
    c(0xA327, None, "YI SYLLABLE SYP", 0x31, "Yi_Syllables"),
    c(0xA328, None, "YI SYLLABLE SYRX", 0x31, "Yi_Syllables"),
    c(0xA329, None, "YI SYLLABLE SYR", 0x31, "Yi_Syllables"),
    c(0xA32A, None, "YI SYLLABLE SSIT", 0x31, "Yi_Syllables"),
    c(0xA32B, None, "YI SYLLABLE SSIX", 0x31, "Yi_Syllables"),
    c(0xA32C, None, "YI SYLLABLE SSI", 0x31, "Yi_Syllables"),
    c(0xA32D, None, "YI SYLLABLE SSIP", 0x31, "Yi_Syllables"),
    c(0xA32E, None, "YI SYLLABLE SSIEX", 0x31, "Yi_Syllables"),
    c(0xA32F, None, "YI SYLLABLE SSIE", 0x31, "Yi_Syllables"),
    c(0xA330, None, "YI SYLLABLE SSIEP", 0x31, "Yi_Syllables"),
    c(0xA331, None, "YI SYLLABLE SSAT", 0x31, "Yi_Syllables"),
    c(0xA332, None, "YI SYLLABLE SSAX", 0x31, "Yi_Syllables"),
    c(0xA333, None, "YI SYLLABLE SSA", 0x31, "Yi_Syllables"),
    c(0xA334, None, "YI SYLLABLE SSAP", 0x31, "Yi_Syllables"),
    c(0xA335, None, "YI SYLLABLE SSOT", 0x31, "Yi_Syllables"),
    c(0xA336, None, "YI SYLLABLE SSOX", 0x31, "Yi_Syllables"),
    c(0xA337, None, "YI SYLLABLE SSO", 0x31, "Yi_Syllables"),
    c(0xA338, None, "YI SYLLABLE SSOP", 0x31, "Yi_Syllables"),
    c(0xA339, None, "YI SYLLABLE SSEX", 0x31, "Yi_Syllables"),
    c(0xA33A, None, "YI SYLLABLE SSE", 0x31, "Yi_Syllables"),
    c(0xA33B, None, "YI SYLLABLE SSEP", 0x31, "Yi_Syllables"),
    c(0xA33C, None, "YI SYLLABLE SSUT", 0x31, "Yi_Syllables"),
    c(0xA33D, None, "YI SYLLABLE SSUX", 0x31, "Yi_Syllables"),
    c(0xA33E, None, "YI SYLLABLE SSU", 0x31, "Yi_Syllables"),
    c(0xA33F, None, "YI SYLLABLE SSUP", 0x31, "Yi_Syllables"),
    c(0xA340, None, "YI SYLLABLE SSYT", 0x31, "Yi_Syllables"),
    c(0xA341, None, "YI SYLLABLE SSYX", 0x31, "Yi_Syllables"),
    c(0xA342, None, "YI SYLLABLE SSY", 0x31, "Yi_Syllables"),
    c(0xA343, None, "YI SYLLABLE SSYP", 0x31, "Yi_Syllables"),
    c(0xA344, None, "YI SYLLABLE SSYRX", 0x31, "Yi_Syllables"),
    c(0xA345, None, "YI SYLLABLE SSYR", 0x31, "Yi_Syllables"),
    c(0xA346, None, "YI SYLLABLE ZHAT", 0x31, "Yi_Syllables"),
    c(0xA347, None, "YI SYLLABLE ZHAX", 0x31, "Yi_Syllables"),
    c(0xA348, None, "YI SYLLABLE ZHA", 0x31, "Yi_Syllables"),
    c(0xA349, None, "YI SYLLABLE ZHAP", 0x31, "Yi_Syllables"),
    c(0xA34A, None, "YI SYLLABLE ZHUOX", 0x31, "Yi_Syllables"),
    c(0xA34B, None, "YI SYLLABLE ZHUO", 0x31, "Yi_Syllables"),
    c(0xA34C, None, "YI SYLLABLE ZHUOP", 0x31, "Yi_Syllables"),
    c(0xA34D, None, "YI SYLLABLE ZHOT", 0x31, "Yi_Syllables"),
    c(0xA34E, None, "YI SYLLABLE ZHOX", 0x31, "Yi_Syllables"),
    c(0xA34F, None, "YI SYLLABLE ZHO", 0x31, "Yi_Syllables"),
    c(0xA350, None, "YI SYLLABLE ZHOP", 0x31, "Yi_Syllables"),
    c(0xA351, None, "YI SYLLABLE ZHET", 0x31, "Yi_Syllables"),
    c(0xA352, None, "YI SYLLABLE ZHEX", 0x31, "Yi_Syllables"),
    c(0xA353, None, "YI SYLLABLE ZHE", 0x31, "Yi_Syllables"),
    c(0xA354, None, "YI SYLLABLE ZHEP", 0x31, "Yi_Syllables"),
    c(0xA355, None, "YI SYLLABLE ZHUT", 0x31, "Yi_Syllables"),
    c(0xA356, None, "YI SYLLABLE ZHUX", 0x31, "Yi_Syllables"),
    c(0xA357, None, "YI SYLLABLE ZHU", 0x31, "Yi_Syllables"),
    c(0xA358, None, "YI SYLLABLE ZHUP", 0x31, "Yi_Syllables"),
    c(0xA359, None, "YI SYLLABLE ZHURX", 0x31, "Yi_Syllables"),
    c(0xA35A, None, "YI SYLLABLE ZHUR", 0x31, "Yi_Syllables"),
    c(0xA35B, None, "YI SYLLABLE ZHYT", 0x31, "Yi_Syllables"),
    c(0xA35C, None, "YI SYLLABLE ZHYX", 0x31, "Yi_Syllables"),
    c(0xA35D, None, "YI SYLLABLE ZHY", 0x31, "Yi_Syllables"),
    c(0xA35E, None, "YI SYLLABLE ZHYP", 0x31, "Yi_Syllables"),
    c(0xA35F, None, "YI SYLLABLE ZHYRX", 0x31, "Yi_Syllables"),
    c(0xA360, None, "YI SYLLABLE ZHYR", 0x31, "Yi_Syllables"),
    c(0xA361, None, "YI SYLLABLE CHAT", 0x31, "Yi_Syllables"),
    c(0xA362, None, "YI SYLLABLE CHAX", 0x31, "Yi_Syllables"),
    c(0xA363, None, "YI SYLLABLE CHA", 0x31, "Yi_Syllables"),
    c(0xA364, None, "YI SYLLABLE CHAP", 0x31, "Yi_Syllables"),
    c(0xA365, None, "YI SYLLABLE CHUOT", 0x31, "Yi_Syllables"),
    c(0xA366, None, "YI SYLLABLE CHUOX", 0x31, "Yi_Syllables"),
    c(0xA367, None, "YI SYLLABLE CHUO", 0x31, "Yi_Syllables"),
    c(0xA368, None, "YI SYLLABLE CHUOP", 0x31, "Yi_Syllables"),
    c(0xA369, None, "YI SYLLABLE CHOT", 0x31, "Yi_Syllables"),
    c(0xA36A, None, "YI SYLLABLE CHOX", 0x31, "Yi_Syllables"),
    c(0xA36B, None, "YI SYLLABLE CHO", 0x31, "Yi_Syllables"),
    c(0xA36C, None, "YI SYLLABLE CHOP", 0x31, "Yi_Syllables"),
    c(0xA36D, None, "YI SYLLABLE CHET", 0x31, "Yi_Syllables"),
    c(0xA36E, None, "YI SYLLABLE CHEX", 0x31, "Yi_Syllables"),
    c(0xA36F, None, "YI SYLLABLE CHE", 0x31, "Yi_Syllables"),
    c(0xA370, None, "YI SYLLABLE CHEP", 0x31, "Yi_Syllables"),
    c(0xA371, None, "YI SYLLABLE CHUX", 0x31, "Yi_Syllables"),
    c(0xA372, None, "YI SYLLABLE CHU", 0x31, "Yi_Syllables"),
    c(0xA373, None, "YI SYLLABLE CHUP", 0x31, "Yi_Syllables"),
    c(0xA374, None, "YI SYLLABLE CHURX", 0x31, "Yi_Syllables"),
    c(0xA375, None, "YI SYLLABLE CHUR", 0x31, "Yi_Syllables"),
    c(0xA376, None, "YI SYLLABLE CHYT", 0x31, "Yi_Syllables"),
    c(0xA377, None, "YI SYLLABLE CHYX", 0x31, "Yi_Syllables"),
    c(0xA378, None, "YI SYLLABLE CHY", 0x31, "Yi_Syllables"),
    c(0xA379, None, "YI SYLLABLE CHYP", 0x31, "Yi_Syllables"),
    c(0xA37A, None, "YI SYLLABLE CHYRX", 0x31, "Yi_Syllables"),
    c(0xA37B, None, "YI SYLLABLE CHYR", 0x31, "Yi_Syllables"),
    c(0xA37C, None, "YI SYLLABLE RRAX", 0x31, "Yi_Syllables"),
    c(0xA37D, None, "YI SYLLABLE RRA", 0x31, "Yi_Syllables"),
    c(0xA37E, None, "YI SYLLABLE RRUOX", 0x31, "Yi_Syllables"),
    c(0xA37F, None, "YI SYLLABLE RRUO", 0x31, "Yi_Syllables"),
    c(0xA380, None, "YI SYLLABLE RROT", 0x31, "Yi_Syllables"),
    c(0xA381, None, "YI SYLLABLE RROX", 0x31, "Yi_Syllables"),
    c(0xA382, None, "YI SYLLABLE RRO", 0x31, "Yi_Syllables"),
    c(0xA383, None, "YI SYLLABLE RROP", 0x31, "Yi_Syllables"),
    c(0xA384, None, "YI SYLLABLE RRET", 0x31, "Yi_Syllables"),
    c(0xA385, None, "YI SYLLABLE RREX", 0x31, "Yi_Syllables"),
    c(0xA386, None, "YI SYLLABLE RRE", 0x31, "Yi_Syllables"),
    c(0xA387, None, "YI SYLLABLE RREP", 0x31, "Yi_Syllables"),
    c(0xA388, None, "YI SYLLABLE RRUT", 0x31, "Yi_Syllables"),
    c(0xA389, None, "YI SYLLABLE RRUX", 0x31, "Yi_Syllables"),
    c(0xA38A, None, "YI SYLLABLE RRU", 0x31, "Yi_Syllables"),
    c(0xA38B, None, "YI SYLLABLE RRUP", 0x31, "Yi_Syllables"),
    c(0xA38C, None, "YI SYLLABLE RRURX", 0x31, "Yi_Syllables"),
    c(0xA38D, None, "YI SYLLABLE RRUR", 0x31, "Yi_Syllables"),
    c(0xA38E, None, "YI SYLLABLE RRYT", 0x31, "Yi_Syllables"),
    c(0xA38F, None, "YI SYLLABLE RRYX", 0x31, "Yi_Syllables"),
    c(0xA390, None, "YI SYLLABLE RRY", 0x31, "Yi_Syllables"),
    c(0xA391, None, "YI SYLLABLE RRYP", 0x31, "Yi_Syllables"),
    c(0xA392, None, "YI SYLLABLE RRYRX", 0x31, "Yi_Syllables"),
    c(0xA393, None, "YI SYLLABLE RRYR", 0x31, "Yi_Syllables"),
    c(0xA394, None, "YI SYLLABLE NRAT", 0x31, "Yi_Syllables"),
    c(0xA395, None, "YI SYLLABLE NRAX", 0x31, "Yi_Syllables"),
    c(0xA396, None, "YI SYLLABLE NRA", 0x31, "Yi_Syllables"),
    c(0xA397, None, "YI SYLLABLE NRAP", 0x31, "Yi_Syllables"),
    c(0xA398, None, "YI SYLLABLE NROX", 0x31, "Yi_Syllables"),
    c(0xA399, None, "YI SYLLABLE NRO", 0x31, "Yi_Syllables"),
    c(0xA39A, None, "YI SYLLABLE NROP", 0x31, "Yi_Syllables"),
    c(0xA39B, None, "YI SYLLABLE NRET", 0x31, "Yi_Syllables"),
    c(0xA39C, None, "YI SYLLABLE NREX", 0x31, "Yi_Syllables"),
    c(0xA39D, None, "YI SYLLABLE NRE", 0x31, "Yi_Syllables"),
    c(0xA39E, None, "YI SYLLABLE NREP", 0x31, "Yi_Syllables"),
    c(0xA39F, None, "YI SYLLABLE NRUT", 0x31, "Yi_Syllables"),
    c(0xA3A0, None, "YI SYLLABLE NRUX", 0x31, "Yi_Syllables"),
    c(0xA3A1, None, "YI SYLLABLE NRU", 0x31, "Yi_Syllables"),
    c(0xA3A2, None, "YI SYLLABLE NRUP", 0x31, "Yi_Syllables"),
    c(0xA3A3, None, "YI SYLLABLE NRURX", 0x31, "Yi_Syllables"),
    c(0xA3A4, None, "YI SYLLABLE NRUR", 0x31, "Yi_Syllables"),
    c(0xA3A5, None, "YI SYLLABLE NRYT", 0x31, "Yi_Syllables"),
    c(0xA3A6, None, "YI SYLLABLE NRYX", 0x31, "Yi_Syllables"),
    c(0xA3A7, None, "YI SYLLABLE NRY", 0x31, "Yi_Syllables"),
    c(0xA3A8, None, "YI SYLLABLE NRYP", 0x31, "Yi_Syllables"),
    c(0xA3A9, None, "YI SYLLABLE NRYRX", 0x31, "Yi_Syllables"),
    c(0xA3AA, None, "YI SYLLABLE NRYR", 0x31, "Yi_Syllables"),
    c(0xA3AB, None, "YI SYLLABLE SHAT", 0x31, "Yi_Syllables"),
    c(0xA3AC, None, "YI SYLLABLE SHAX", 0x31, "Yi_Syllables"),
    c(0xA3AD, None, "YI SYLLABLE SHA", 0x31, "Yi_Syllables"),
    c(0xA3AE, None, "YI SYLLABLE SHAP", 0x31, "Yi_Syllables"),
    c(0xA3AF, None, "YI SYLLABLE SHUOX", 0x31, "Yi_Syllables"),
    c(0xA3B0, None, "YI SYLLABLE SHUO", 0x31, "Yi_Syllables"),
    c(0xA3B1, None, "YI SYLLABLE SHUOP", 0x31, "Yi_Syllables"),
    c(0xA3B2, None, "YI SYLLABLE SHOT", 0x31, "Yi_Syllables"),
    c(0xA3B3, None, "YI SYLLABLE SHOX", 0x31, "Yi_Syllables"),
    c(0xA3B4, None, "YI SYLLABLE SHO", 0x31, "Yi_Syllables"),
    c(0xA3B5, None, "YI SYLLABLE SHOP", 0x31, "Yi_Syllables"),
    c(0xA3B6, None, "YI SYLLABLE SHET", 0x31, "Yi_Syllables"),
    c(0xA3B7, None, "YI SYLLABLE SHEX", 0x31, "Yi_Syllables"),
    c(0xA3B8, None, "YI SYLLABLE SHE", 0x31, "Yi_Syllables"),
    c(0xA3B9, None, "YI SYLLABLE SHEP", 0x31, "Yi_Syllables"),
    c(0xA3BA, None, "YI SYLLABLE SHUT", 0x31, "Yi_Syllables"),
    c(0xA3BB, None, "YI SYLLABLE SHUX", 0x31, "Yi_Syllables"),
    c(0xA3BC, None, "YI SYLLABLE SHU", 0x31, "Yi_Syllables"),
    c(0xA3BD, None, "YI SYLLABLE SHUP", 0x31, "Yi_Syllables"),
    c(0xA3BE, None, "YI SYLLABLE SHURX", 0x31, "Yi_Syllables"),
    c(0xA3BF, None, "YI SYLLABLE SHUR", 0x31, "Yi_Syllables"),
    c(0xA3C0, None, "YI SYLLABLE SHYT", 0x31, "Yi_Syllables"),
    c(0xA3C1, None, "YI SYLLABLE SHYX", 0x31, "Yi_Syllables"),
    c(0xA3C2, None, "YI SYLLABLE SHY", 0x31, "Yi_Syllables"),
    c(0xA3C3, None, "YI SYLLABLE SHYP", 0x31, "Yi_Syllables"),
    c(0xA3C4, None, "YI SYLLABLE SHYRX", 0x31, "Yi_Syllables"),
    c(0xA3C5, None, "YI SYLLABLE SHYR", 0x31, "Yi_Syllables"),
    c(0xA3C6, None, "YI SYLLABLE RAT", 0x31, "Yi_Syllables"),
    c(0xA3C7, None, "YI SYLLABLE RAX", 0x31, "Yi_Syllables"),
    c(0xA3C8, None, "YI SYLLABLE RA", 0x31, "Yi_Syllables"),
    c(0xA3C9, None, "YI SYLLABLE RAP", 0x31, "Yi_Syllables"),
    c(0xA3CA, None, "YI SYLLABLE RUOX", 0x31, "Yi_Syllables"),
    c(0xA3CB, None, "YI SYLLABLE RUO", 0x31, "Yi_Syllables"),
    c(0xA3CC, None, "YI SYLLABLE RUOP", 0x31, "Yi_Syllables"),
    c(0xA3CD, None, "YI SYLLABLE ROT", 0x31, "Yi_Syllables"),
    c(0xA3CE, None, "YI SYLLABLE ROX", 0x31, "Yi_Syllables"),
    c(0xA3CF, None, "YI SYLLABLE RO", 0x31, "Yi_Syllables"),
    c(0xA3D0, None, "YI SYLLABLE ROP", 0x31, "Yi_Syllables"),
    c(0xA3D1, None, "YI SYLLABLE REX", 0x31, "Yi_Syllables"),
    c(0xA3D2, None, "YI SYLLABLE RE", 0x31, "Yi_Syllables"),
    c(0xA3D3, None, "YI SYLLABLE REP", 0x31, "Yi_Syllables"),
    c(0xA3D4, None, "YI SYLLABLE RUT", 0x31, "Yi_Syllables"),
    c(0xA3D5, None, "YI SYLLABLE RUX", 0x31, "Yi_Syllables"),
    c(0xA3D6, None, "YI SYLLABLE RU", 0x31, "Yi_Syllables"),
    c(0xA3D7, None, "YI SYLLABLE RUP", 0x31, "Yi_Syllables"),
    c(0xA3D8, None, "YI SYLLABLE RURX", 0x31, "Yi_Syllables"),
    c(0xA3D9, None, "YI SYLLABLE RUR", 0x31, "Yi_Syllables"),
    c(0xA3DA, None, "YI SYLLABLE RYT", 0x31, "Yi_Syllables"),
    c(0xA3DB, None, "YI SYLLABLE RYX", 0x31, "Yi_Syllables"),
    c(0xA3DC, None, "YI SYLLABLE RY", 0x31, "Yi_Syllables"),
    c(0xA3DD, None, "YI SYLLABLE RYP", 0x31, "Yi_Syllables"),
    c(0xA3DE, None, "YI SYLLABLE RYRX", 0x31, "Yi_Syllables"),
    c(0xA3DF, None, "YI SYLLABLE RYR", 0x31, "Yi_Syllables"),
    c(0xA3E0, None, "YI SYLLABLE JIT", 0x31, "Yi_Syllables"),
    c(0xA3E1, None, "YI SYLLABLE JIX", 0x31, "Yi_Syllables"),
    c(0xA3E2, None, "YI SYLLABLE JI", 0x31, "Yi_Syllables"),
    c(0xA3E3, None, "YI SYLLABLE JIP", 0x31, "Yi_Syllables"),
    c(0xA3E4, None, "YI SYLLABLE JIET", 0x31, "Yi_Syllables"),
    c(0xA3E5, None, "YI SYLLABLE JIEX", 0x31, "Yi_Syllables"),
    c(0xA3E6, None, "YI SYLLABLE JIE", 0x31, "Yi_Syllables"),
    c(0xA3E7, None, "YI SYLLABLE JIEP", 0x31, "Yi_Syllables"),
    c(0xA3E8, None, "YI SYLLABLE JUOT", 0x31, "Yi_Syllables"),
    c(0xA3E9, None, "YI SYLLABLE JUOX", 0x31, "Yi_Syllables"),
    c(0xA3EA, None, "YI SYLLABLE JUO", 0x31, "Yi_Syllables"),
    c(0xA3EB, None, "YI SYLLABLE JUOP", 0x31, "Yi_Syllables"),
    c(0xA3EC, None, "YI SYLLABLE JOT", 0x31, "Yi_Syllables"),
    c(0xA3ED, None, "YI SYLLABLE JOX", 0x31, "Yi_Syllables"),
    c(0xA3EE, None, "YI SYLLABLE JO", 0x31, "Yi_Syllables"),
    c(0xA3EF, None, "YI SYLLABLE JOP", 0x31, "Yi_Syllables"),
    c(0xA3F0, None, "YI SYLLABLE JUT", 0x31, "Yi_Syllables"),
    c(0xA3F1, None, "YI SYLLABLE JUX", 0x31, "Yi_Syllables"),
    c(0xA3F2, None, "YI SYLLABLE JU", 0x31, "Yi_Syllables"),
    c(0xA3F3, None, "YI SYLLABLE JUP", 0x31, "Yi_Syllables"),
    c(0xA3F4, None, "YI SYLLABLE JURX", 0x31, "Yi_Syllables"),
    c(0xA3F5, None, "YI SYLLABLE JUR", 0x31, "Yi_Syllables"),
    c(0xA3F6, None, "YI SYLLABLE JYT", 0x31, "Yi_Syllables"),
    c(0xA3F7, None, "YI SYLLABLE JYX", 0x31, "Yi_Syllables"),
    c(0xA3F8, None, "YI SYLLABLE JY", 0x31, "Yi_Syllables"),
    c(0xA3F9, None, "YI SYLLABLE JYP", 0x31, "Yi_Syllables"),
    c(0xA3FA, None, "YI SYLLABLE JYRX", 0x31, "Yi_Syllables"),
    c(0xA3FB, None, "YI SYLLABLE JYR", 0x31, "Yi_Syllables"),
    c(0xA3FC, None, "YI SYLLABLE QIT", 0x31, "Yi_Syllables"),
    c(0xA3FD, None, "YI SYLLABLE QIX", 0x31, "Yi_Syllables"),
    c(0xA3FE, None, "YI SYLLABLE QI", 0x31, "Yi_Syllables"),
    c(0xA3FF, None, "YI SYLLABLE QIP", 0x31, "Yi_Syllables"),
    c(0xA400, None, "YI SYLLABLE QIET", 0x31, "Yi_Syllables"),
    c(0xA401, None, "YI SYLLABLE QIEX", 0x31, "Yi_Syllables"),
    c(0xA402, None, "YI SYLLABLE QIE", 0x31, "Yi_Syllables"),
    c(0xA403, None, "YI SYLLABLE QIEP", 0x31, "Yi_Syllables"),
    c(0xA404, None, "YI SYLLABLE QUOT", 0x31, "Yi_Syllables"),
    c(0xA405, None, "YI SYLLABLE QUOX", 0x31, "Yi_Syllables"),
    c(0xA406, None, "YI SYLLABLE QUO", 0x31, "Yi_Syllables"),
    c(0xA407, None, "YI SYLLABLE QUOP", 0x31, "Yi_Syllables"),
    c(0xA408, None, "YI SYLLABLE QOT", 0x31, "Yi_Syllables"),
    c(0xA409, None, "YI SYLLABLE QOX", 0x31, "Yi_Syllables"),
    c(0xA40A, None, "YI SYLLABLE QO", 0x31, "Yi_Syllables"),
    c(0xA40B, None, "YI SYLLABLE QOP", 0x31, "Yi_Syllables"),
    c(0xA40C, None, "YI SYLLABLE QUT", 0x31, "Yi_Syllables"),
    c(0xA40D, None, "YI SYLLABLE QUX", 0x31, "Yi_Syllables"),
    c(0xA40E, None, "YI SYLLABLE QU", 0x31, "Yi_Syllables"),
    c(0xA40F, None, "YI SYLLABLE QUP", 0x31, "Yi_Syllables"),
    c(0xA410, None, "YI SYLLABLE QURX", 0x31, "Yi_Syllables"),
    c(0xA411, None, "YI SYLLABLE QUR", 0x31, "Yi_Syllables"),
    c(0xA412, None, "YI SYLLABLE QYT", 0x31, "Yi_Syllables"),
    c(0xA413, None, "YI SYLLABLE QYX", 0x31, "Yi_Syllables"),
    c(0xA414, None, "YI SYLLABLE QY", 0x31, "Yi_Syllables"),
    c(0xA415, None, "YI SYLLABLE QYP", 0x31, "Yi_Syllables"),
    c(0xA416, None, "YI SYLLABLE QYRX", 0x31, "Yi_Syllables"),
    c(0xA417, None, "YI SYLLABLE QYR", 0x31, "Yi_Syllables"),
    c(0xA418, None, "YI SYLLABLE JJIT", 0x31, "Yi_Syllables"),
    c(0xA419, None, "YI SYLLABLE JJIX", 0x31, "Yi_Syllables"),
    c(0xA41A, None, "YI SYLLABLE JJI", 0x31, "Yi_Syllables"),
    c(0xA41B, None, "YI SYLLABLE JJIP", 0x31, "Yi_Syllables"),
    c(0xA41C, None, "YI SYLLABLE JJIET", 0x31, "Yi_Syllables"),
    c(0xA41D, None, "YI SYLLABLE JJIEX", 0x31, "Yi_Syllables"),
    c(0xA41E, None, "YI SYLLABLE JJIE", 0x31, "Yi_Syllables"),
    c(0xA41F, None, "YI SYLLABLE JJIEP", 0x31, "Yi_Syllables"),
    c(0xA420, None, "YI SYLLABLE JJUOX", 0x31, "Yi_Syllables"),
    c(0xA421, None, "YI SYLLABLE JJUO", 0x31, "Yi_Syllables"),
    c(0xA422, None, "YI SYLLABLE JJUOP", 0x31, "Yi_Syllables"),
    c(0xA423, None, "YI SYLLABLE JJOT", 0x31, "Yi_Syllables"),
    c(0xA424, None, "YI SYLLABLE JJOX", 0x31, "Yi_Syllables"),
    c(0xA425, None, "YI SYLLABLE JJO", 0x31, "Yi_Syllables"),
    c(0xA426, None, "YI SYLLABLE JJOP", 0x31, "Yi_Syllables"),
    c(0xA427, None, "YI SYLLABLE JJUT", 0x31, "Yi_Syllables"),
    c(0xA428, None, "YI SYLLABLE JJUX", 0x31, "Yi_Syllables"),
    c(0xA429, None, "YI SYLLABLE JJU", 0x31, "Yi_Syllables"),
    c(0xA42A, None, "YI SYLLABLE JJUP", 0x31, "Yi_Syllables"),
    c(0xA42B, None, "YI SYLLABLE JJURX", 0x31, "Yi_Syllables"),
    c(0xA42C, None, "YI SYLLABLE JJUR", 0x31, "Yi_Syllables"),
    c(0xA42D, None, "YI SYLLABLE JJYT", 0x31, "Yi_Syllables"),
    c(0xA42E, None, "YI SYLLABLE JJYX", 0x31, "Yi_Syllables"),
    c(0xA42F, None, "YI SYLLABLE JJY", 0x31, "Yi_Syllables"),
    c(0xA430, None, "YI SYLLABLE JJYP", 0x31, "Yi_Syllables"),
    c(0xA431, None, "YI SYLLABLE NJIT", 0x31, "Yi_Syllables"),
    c(0xA432, None, "YI SYLLABLE NJIX", 0x31, "Yi_Syllables"),
    c(0xA433, None, "YI SYLLABLE NJI", 0x31, "Yi_Syllables"),
    c(0xA434, None, "YI SYLLABLE NJIP", 0x31, "Yi_Syllables"),
    c(0xA435, None, "YI SYLLABLE NJIET", 0x31, "Yi_Syllables"),
    c(0xA436, None, "YI SYLLABLE NJIEX", 0x31, "Yi_Syllables"),
    c(0xA437, None, "YI SYLLABLE NJIE", 0x31, "Yi_Syllables"),
    c(0xA438, None, "YI SYLLABLE NJIEP", 0x31, "Yi_Syllables"),
    c(0xA439, None, "YI SYLLABLE NJUOX", 0x31, "Yi_Syllables"),
    c(0xA43A, None, "YI SYLLABLE NJUO", 0x31, "Yi_Syllables"),
    c(0xA43B, None, "YI SYLLABLE NJOT", 0x31, "Yi_Syllables"),
    c(0xA43C, None, "YI SYLLABLE NJOX", 0x31, "Yi_Syllables"),
    c(0xA43D, None, "YI SYLLABLE NJO", 0x31, "Yi_Syllables"),
    c(0xA43E, None, "YI SYLLABLE NJOP", 0x31, "Yi_Syllables"),
    c(0xA43F, None, "YI SYLLABLE NJUX", 0x31, "Yi_Syllables"),
    c(0xA440, None, "YI SYLLABLE NJU", 0x31, "Yi_Syllables"),
    c(0xA441, None, "YI SYLLABLE NJUP", 0x31, "Yi_Syllables"),
    c(0xA442, None, "YI SYLLABLE NJURX", 0x31, "Yi_Syllables"),
    c(0xA443, None, "YI SYLLABLE NJUR", 0x31, "Yi_Syllables"),
    c(0xA444, None, "YI SYLLABLE NJYT", 0x31, "Yi_Syllables"),
    c(0xA445, None, "YI SYLLABLE NJYX", 0x31, "Yi_Syllables"),
    c(0xA446, None, "YI SYLLABLE NJY", 0x31, "Yi_Syllables"),
    c(0xA447, None, "YI SYLLABLE NJYP", 0x31, "Yi_Syllables"),
    c(0xA448, None, "YI SYLLABLE NJYRX", 0x31, "Yi_Syllables"),
    c(0xA449, None, "YI SYLLABLE NJYR", 0x31, "Yi_Syllables"),
    c(0xA44A, None, "YI SYLLABLE NYIT", 0x31, "Yi_Syllables"),
    c(0xA44B, None, "YI SYLLABLE NYIX", 0x31, "Yi_Syllables"),
    c(0xA44C, None, "YI SYLLABLE NYI", 0x31, "Yi_Syllables"),
    c(0xA44D, None, "YI SYLLABLE NYIP", 0x31, "Yi_Syllables"),
    c(0xA44E, None, "YI SYLLABLE NYIET", 0x31, "Yi_Syllables"),
    c(0xA44F, None, "YI SYLLABLE NYIEX", 0x31, "Yi_Syllables"),
    c(0xA450, None, "YI SYLLABLE NYIE", 0x31, "Yi_Syllables"),
    c(0xA451, None, "YI SYLLABLE NYIEP", 0x31, "Yi_Syllables"),
    c(0xA452, None, "YI SYLLABLE NYUOX", 0x31, "Yi_Syllables"),
    c(0xA453, None, "YI SYLLABLE NYUO", 0x31, "Yi_Syllables"),
    c(0xA454, None, "YI SYLLABLE NYUOP", 0x31, "Yi_Syllables"),
    c(0xA455, None, "YI SYLLABLE NYOT", 0x31, "Yi_Syllables"),
    c(0xA456, None, "YI SYLLABLE NYOX", 0x31, "Yi_Syllables"),
    c(0xA457, None, "YI SYLLABLE NYO", 0x31, "Yi_Syllables"),
    c(0xA458, None, "YI SYLLABLE NYOP", 0x31, "Yi_Syllables"),
    c(0xA459, None, "YI SYLLABLE NYUT", 0x31, "Yi_Syllables"),
    c(0xA45A, None, "YI SYLLABLE NYUX", 0x31, "Yi_Syllables"),
    c(0xA45B, None, "YI SYLLABLE NYU", 0x31, "Yi_Syllables"),
    c(0xA45C, None, "YI SYLLABLE NYUP", 0x31, "Yi_Syllables"),
    c(0xA45D, None, "YI SYLLABLE XIT", 0x31, "Yi_Syllables"),
    c(0xA45E, None, "YI SYLLABLE XIX", 0x31, "Yi_Syllables"),
    c(0xA45F, None, "YI SYLLABLE XI", 0x31, "Yi_Syllables"),
    c(0xA460, None, "YI SYLLABLE XIP", 0x31, "Yi_Syllables"),
    c(0xA461, None, "YI SYLLABLE XIET", 0x31, "Yi_Syllables"),
    c(0xA462, None, "YI SYLLABLE XIEX", 0x31, "Yi_Syllables"),
    c(0xA463, None, "YI SYLLABLE XIE", 0x31, "Yi_Syllables"),
    c(0xA464, None, "YI SYLLABLE XIEP", 0x31, "Yi_Syllables"),
    c(0xA465, None, "YI SYLLABLE XUOX", 0x31, "Yi_Syllables"),
    c(0xA466, None, "YI SYLLABLE XUO", 0x31, "Yi_Syllables"),
    c(0xA467, None, "YI SYLLABLE XOT", 0x31, "Yi_Syllables"),
    c(0xA468, None, "YI SYLLABLE XOX", 0x31, "Yi_Syllables"),
    c(0xA469, None, "YI SYLLABLE XO", 0x31, "Yi_Syllables"),
    c(0xA46A, None, "YI SYLLABLE XOP", 0x31, "Yi_Syllables"),
    c(0xA46B, None, "YI SYLLABLE XYT", 0x31, "Yi_Syllables"),
    c(0xA46C, None, "YI SYLLABLE XYX", 0x31, "Yi_Syllables"),
    c(0xA46D, None, "YI SYLLABLE XY", 0x31, "Yi_Syllables"),
    c(0xA46E, None, "YI SYLLABLE XYP", 0x31, "Yi_Syllables"),
    c(0xA46F, None, "YI SYLLABLE XYRX", 0x31, "Yi_Syllables"),
    c(0xA470, None, "YI SYLLABLE XYR", 0x31, "Yi_Syllables"),
    c(0xA471, None, "YI SYLLABLE YIT", 0x31, "Yi_Syllables"),
    c(0xA472, None, "YI SYLLABLE YIX", 0x31, "Yi_Syllables"),
    c(0xA473, None, "YI SYLLABLE YI", 0x31, "Yi_Syllables"),
    c(0xA474, None, "YI SYLLABLE YIP", 0x31, "Yi_Syllables"),
    c(0xA475, None, "YI SYLLABLE YIET", 0x31, "Yi_Syllables"),
    c(0xA476, None, "YI SYLLABLE YIEX", 0x31, "Yi_Syllables"),
    c(0xA477, None, "YI SYLLABLE YIE", 0x31, "Yi_Syllables"),
    c(0xA478, None, "YI SYLLABLE YIEP", 0x31, "Yi_Syllables"),
    c(0xA479, None, "YI SYLLABLE YUOT", 0x31, "Yi_Syllables"),
    c(0xA47A, None, "YI SYLLABLE YUOX", 0x31, "Yi_Syllables"),
    c(0xA47B, None, "YI SYLLABLE YUO", 0x31, "Yi_Syllables"),
    c(0xA47C, None, "YI SYLLABLE YUOP", 0x31, "Yi_Syllables"),
    c(0xA47D, None, "YI SYLLABLE YOT", 0x31, "Yi_Syllables"),
    c(0xA47E, None, "YI SYLLABLE YOX", 0x31, "Yi_Syllables"),
    c(0xA47F, None, "YI SYLLABLE YO", 0x31, "Yi_Syllables"),
    c(0xA480, None, "YI SYLLABLE YOP", 0x31, "Yi_Syllables"),
    c(0xA481, None, "YI SYLLABLE YUT", 0x31, "Yi_Syllables"),
    c(0xA482, None, "YI SYLLABLE YUX", 0x31, "Yi_Syllables"),
    c(0xA483, None, "YI SYLLABLE YU", 0x31, "Yi_Syllables"),
    c(0xA484, None, "YI SYLLABLE YUP", 0x31, "Yi_Syllables"),
    c(0xA485, None, "YI SYLLABLE YURX", 0x31, "Yi_Syllables"),
    c(0xA486, None, "YI SYLLABLE YUR", 0x31, "Yi_Syllables"),
    c(0xA487, None, "YI SYLLABLE YYT", 0x31, "Yi_Syllables"),
    c(0xA488, None, "YI SYLLABLE YYX", 0x31, "Yi_Syllables"),
    c(0xA489, None, "YI SYLLABLE YY", 0x31, "Yi_Syllables"),
    c(0xA48A, None, "YI SYLLABLE YYP", 0x31, "Yi_Syllables"),
    c(0xA48B, None, "YI SYLLABLE YYRX", 0x31, "Yi_Syllables"),
    c(0xA48C, None, "YI SYLLABLE YYR", 0x31, "Yi_Syllables"),
    c(0xA490, None, "YI RADICAL QOT", 0x00, "Yi_Radicals"),
    c(0xA491, None, "YI RADICAL LI", 0x00, "Yi_Radicals"),
    c(0xA492, None, "YI RADICAL KIT", 0x00, "Yi_Radicals"),
    c(0xA493, None, "YI RADICAL NYIP", 0x00, "Yi_Radicals"),
    c(0xA494, None, "YI RADICAL CYP", 0x00, "Yi_Radicals"),
    c(0xA495, None, "YI RADICAL SSI", 0x00, "Yi_Radicals"),
    c(0xA496, None, "YI RADICAL GGOP", 0x00, "Yi_Radicals"),
    c(0xA497, None, "YI RADICAL GEP", 0x00, "Yi_Radicals"),
    c(0xA498, None, "YI RADICAL MI", 0x00, "Yi_Radicals"),
    c(0xA499, None, "YI RADICAL HXIT", 0x00, "Yi_Radicals"),
    c(0xA49A, None, "YI RADICAL LYR", 0x00, "Yi_Radicals"),
    c(0xA49B, None, "YI RADICAL BBUT", 0x00, "Yi_Radicals"),
    c(0xA49C, None, "YI RADICAL MOP", 0x00, "Yi_Radicals"),
    c(0xA49D, None, "YI RADICAL YO", 0x00, "Yi_Radicals"),
    c(0xA49E, None, "YI RADICAL PUT", 0x00, "Yi_Radicals"),
    c(0xA49F, None, "YI RADICAL HXUO", 0x00, "Yi_Radicals"),
    c(0xA4A0, None, "YI RADICAL TAT", 0x00, "Yi_Radicals"),
    c(0xA4A1, None, "YI RADICAL GA", 0x00, "Yi_Radicals"),
    c(0xA4A2, None, "YI RADICAL ZUP", 0x00, "Yi_Radicals"),
    c(0xA4A3, None, "YI RADICAL CYT", 0x00, "Yi_Radicals"),
    c(0xA4A4, None, "YI RADICAL DDUR", 0x00, "Yi_Radicals"),
    c(0xA4A5, None, "YI RADICAL BUR", 0x00, "Yi_Radicals"),
    c(0xA4A6, None, "YI RADICAL GGUO", 0x00, "Yi_Radicals"),
    c(0xA4A7, None, "YI RADICAL NYOP", 0x00, "Yi_Radicals"),
    c(0xA4A8, None, "YI RADICAL TU", 0x00, "Yi_Radicals"),
    c(0xA4A9, None, "YI RADICAL OP", 0x00, "Yi_Radicals"),
    c(0xA4AA, None, "YI RADICAL JJUT", 0x00, "Yi_Radicals"),
    c(0xA4AB, None, "YI RADICAL ZOT", 0x00, "Yi_Radicals"),
    c(0xA4AC, None, "YI RADICAL PYT", 0x00, "Yi_Radicals"),
    c(0xA4AD, None, "YI RADICAL HMO", 0x00, "Yi_Radicals"),
    c(0xA4AE, None, "YI RADICAL YIT", 0x00, "Yi_Radicals"),
    c(0xA4AF, None, "YI RADICAL VUR", 0x00, "Yi_Radicals"),
    c(0xA4B0, None, "YI RADICAL SHY", 0x00, "Yi_Radicals"),
    c(0xA4B1, None, "YI RADICAL VEP", 0x00, "Yi_Radicals"),
    c(0xA4B2, None, "YI RADICAL ZA", 0x00, "Yi_Radicals"),
    c(0xA4B3, None, "YI RADICAL JO", 0x00, "Yi_Radicals"),
    c(0xA4B4, None, "YI RADICAL NZUP", 0x00, "Yi_Radicals"),
    c(0xA4B5, None, "YI RADICAL JJY", 0x00, "Yi_Radicals"),
    c(0xA4B6, None, "YI RADICAL GOT", 0x00, "Yi_Radicals"),
    c(0xA4B7, None, "YI RADICAL JJIE", 0x00, "Yi_Radicals"),
    c(0xA4B8, None, "YI RADICAL WO", 0x00, "Yi_Radicals"),
    c(0xA4B9, None, "YI RADICAL DU", 0x00, "Yi_Radicals"),
    c(0xA4BA, None, "YI RADICAL SHUR", 0x00, "Yi_Radicals"),
    c(0xA4BB, None, "YI RADICAL LIE", 0x00, "Yi_Radicals"),
    c(0xA4BC, None, "YI RADICAL CY", 0x00, "Yi_Radicals"),
    c(0xA4BD, None, "YI RADICAL CUOP", 0x00, "Yi_Radicals"),
    c(0xA4BE, None, "YI RADICAL CIP", 0x00, "Yi_Radicals"),
    c(0xA4BF, None, "YI RADICAL HXOP", 0x00, "Yi_Radicals"),
    c(0xA4C0, None, "YI RADICAL SHAT", 0x00, "Yi_Radicals"),
    c(0xA4C1, None, "YI RADICAL ZUR", 0x00, "Yi_Radicals"),
    c(0xA4C2, None, "YI RADICAL SHOP", 0x00, "Yi_Radicals"),
    c(0xA4C3, None, "YI RADICAL CHE", 0x00, "Yi_Radicals"),
    c(0xA4C4, None, "YI RADICAL ZZIET", 0x00, "Yi_Radicals"),
    c(0xA4C5, None, "YI RADICAL NBIE", 0x00, "Yi_Radicals"),
    c(0xA4C6, None, "YI RADICAL KE", 0x00, "Yi_Radicals"),
    c(0xA4D0, None, "LISU LETTER BA", 0x31, "Lisu"),
    c(0xA4D1, None, "LISU LETTER PA", 0x31, "Lisu"),
    c(0xA4D2, None, "LISU LETTER PHA", 0x31, "Lisu"),
    c(0xA4D3, None, "LISU LETTER DA", 0x31, "Lisu"),
    c(0xA4D4, None, "LISU LETTER TA", 0x31, "Lisu"),
    c(0xA4D5, None, "LISU LETTER THA", 0x31, "Lisu"),
    c(0xA4D6, None, "LISU LETTER GA", 0x31, "Lisu"),
    c(0xA4D7, None, "LISU LETTER KA", 0x31, "Lisu"),
    c(0xA4D8, None, "LISU LETTER KHA", 0x31, "Lisu"),
    c(0xA4D9, None, "LISU LETTER JA", 0x31, "Lisu"),
    c(0xA4DA, None, "LISU LETTER CA", 0x31, "Lisu"),
    c(0xA4DB, None, "LISU LETTER CHA", 0x31, "Lisu"),
    c(0xA4DC, None, "LISU LETTER DZA", 0x31, "Lisu"),
    c(0xA4DD, None, "LISU LETTER TSA", 0x31, "Lisu"),
    c(0xA4DE, None, "LISU LETTER TSHA", 0x31, "Lisu"),
    c(0xA4DF, None, "LISU LETTER MA", 0x31, "Lisu"),
    c(0xA4E0, None, "LISU LETTER NA", 0x31, "Lisu"),
    c(0xA4E1, None, "LISU LETTER LA", 0x31, "Lisu"),
    c(0xA4E2, None, "LISU LETTER SA", 0x31, "Lisu"),
    c(0xA4E3, None, "LISU LETTER ZHA", 0x31, "Lisu"),
    c(0xA4E4, None, "LISU LETTER ZA", 0x31, "Lisu"),
    c(0xA4E5, None, "LISU LETTER NGA", 0x31, "Lisu"),
    c(0xA4E6, None, "LISU LETTER HA", 0x31, "Lisu"),
    c(0xA4E7, None, "LISU LETTER XA", 0x31, "Lisu"),
    c(0xA4E8, None, "LISU LETTER HHA", 0x31, "Lisu"),
    c(0xA4E9, None, "LISU LETTER FA", 0x31, "Lisu"),
    c(0xA4EA, None, "LISU LETTER WA", 0x31, "Lisu"),
    c(0xA4EB, None, "LISU LETTER SHA", 0x31, "Lisu"),
    c(0xA4EC, None, "LISU LETTER YA", 0x31, "Lisu"),
    c(0xA4ED, None, "LISU LETTER GHA", 0x31, "Lisu"),
    c(0xA4EE, None, "LISU LETTER A", 0x31, "Lisu"),
    c(0xA4EF, None, "LISU LETTER AE", 0x31, "Lisu"),
    c(0xA4F0, None, "LISU LETTER E", 0x31, "Lisu"),
    c(0xA4F1, None, "LISU LETTER EU", 0x31, "Lisu"),
    c(0xA4F2, None, "LISU LETTER I", 0x31, "Lisu"),
    c(0xA4F3, None, "LISU LETTER O", 0x31, "Lisu"),
    c(0xA4F4, None, "LISU LETTER U", 0x31, "Lisu"),
    c(0xA4F5, None, "LISU LETTER UE", 0x31, "Lisu"),
    c(0xA4F6, None, "LISU LETTER UH", 0x31, "Lisu"),
    c(0xA4F7, None, "LISU LETTER OE", 0x31, "Lisu"),
    c(0xA4F8, None, "LISU LETTER TONE MYA TI", 0x31, "Lisu"),
    c(0xA4F9, None, "LISU LETTER TONE NA PO", 0x31, "Lisu"),
    c(0xA4FA, None, "LISU LETTER TONE MYA CYA", 0x31, "Lisu"),
    c(0xA4FB, None, "LISU LETTER TONE MYA BO", 0x31, "Lisu"),
    c(0xA4FC, None, "LISU LETTER TONE MYA NA", 0x31, "Lisu"),
    c(0xA4FD, None, "LISU LETTER TONE MYA JEU", 0x31, "Lisu"),
    c(0xA4FE, None, "LISU PUNCTUATION COMMA", 0x00, "Lisu"),
    c(0xA4FF, None, "LISU PUNCTUATION FULL STOP", 0x00, "Lisu"),
    c(0xA500, None, "VAI SYLLABLE EE", 0x31, "Vai"),
    c(0xA501, None, "VAI SYLLABLE EEN", 0x31, "Vai"),
    c(0xA502, None, "VAI SYLLABLE HEE", 0x31, "Vai"),
    c(0xA503, None, "VAI SYLLABLE WEE", 0x31, "Vai"),
    c(0xA504, None, "VAI SYLLABLE WEEN", 0x31, "Vai"),
    c(0xA505, None, "VAI SYLLABLE PEE", 0x31, "Vai"),
    c(0xA506, None, "VAI SYLLABLE BHEE", 0x31, "Vai"),
    c(0xA507, None, "VAI SYLLABLE BEE", 0x31, "Vai"),
    c(0xA508, None, "VAI SYLLABLE MBEE", 0x31, "Vai"),
    c(0xA509, None, "VAI SYLLABLE KPEE", 0x31, "Vai"),
    c(0xA50A, None, "VAI SYLLABLE MGBEE", 0x31, "Vai"),
    c(0xA50B, None, "VAI SYLLABLE GBEE", 0x31, "Vai"),
    c(0xA50C, None, "VAI SYLLABLE FEE", 0x31, "Vai"),
    c(0xA50D, None, "VAI SYLLABLE VEE", 0x31, "Vai"),
    c(0xA50E, None, "VAI SYLLABLE TEE", 0x31, "Vai"),
    c(0xA50F, None, "VAI SYLLABLE THEE", 0x31, "Vai"),
    c(0xA510, None, "VAI SYLLABLE DHEE", 0x31, "Vai"),
    c(0xA511, None, "VAI SYLLABLE DHHEE", 0x31, "Vai"),
    c(0xA512, None, "VAI SYLLABLE LEE", 0x31, "Vai"),
    c(0xA513, None, "VAI SYLLABLE REE", 0x31, "Vai"),
    c(0xA514, None, "VAI SYLLABLE DEE", 0x31, "Vai"),
    c(0xA515, None, "VAI SYLLABLE NDEE", 0x31, "Vai"),
    c(0xA516, None, "VAI SYLLABLE SEE", 0x31, "Vai"),
    c(0xA517, None, "VAI SYLLABLE SHEE", 0x31, "Vai"),
    c(0xA518, None, "VAI SYLLABLE ZEE", 0x31, "Vai"),
    c(0xA519, None, "VAI SYLLABLE ZHEE", 0x31, "Vai"),
    c(0xA51A, None, "VAI SYLLABLE CEE", 0x31, "Vai"),
    c(0xA51B, None, "VAI SYLLABLE JEE", 0x31, "Vai"),
    c(0xA51C, None, "VAI SYLLABLE NJEE", 0x31, "Vai"),
    c(0xA51D, None, "VAI SYLLABLE YEE", 0x31, "Vai"),
    c(0xA51E, None, "VAI SYLLABLE KEE", 0x31, "Vai"),
    c(0xA51F, None, "VAI SYLLABLE NGGEE", 0x31, "Vai"),
    c(0xA520, None, "VAI SYLLABLE GEE", 0x31, "Vai"),
    c(0xA521, None, "VAI SYLLABLE MEE", 0x31, "Vai"),
    c(0xA522, None, "VAI SYLLABLE NEE", 0x31, "Vai"),
    c(0xA523, None, "VAI SYLLABLE NYEE", 0x31, "Vai"),
    c(0xA524, None, "VAI SYLLABLE I", 0x31, "Vai"),
    c(0xA525, None, "VAI SYLLABLE IN", 0x31, "Vai"),
    c(0xA526, None, "VAI SYLLABLE HI", 0x31, "Vai"),
    c(0xA527, None, "VAI SYLLABLE HIN", 0x31, "Vai"),
    c(0xA528, None, "VAI SYLLABLE WI", 0x31, "Vai"),
    c(0xA529, None, "VAI SYLLABLE WIN", 0x31, "Vai"),
    c(0xA52A, None, "VAI SYLLABLE PI", 0x31, "Vai"),
    c(0xA52B, None, "VAI SYLLABLE BHI", 0x31, "Vai"),
    c(0xA52C, None, "VAI SYLLABLE BI", 0x31, "Vai"),
    c(0xA52D, None, "VAI SYLLABLE MBI", 0x31, "Vai"),
    c(0xA52E, None, "VAI SYLLABLE KPI", 0x31, "Vai"),
    c(0xA52F, None, "VAI SYLLABLE MGBI", 0x31, "Vai"),
    c(0xA530, None, "VAI SYLLABLE GBI", 0x31, "Vai"),
    c(0xA531, None, "VAI SYLLABLE FI", 0x31, "Vai"),
    c(0xA532, None, "VAI SYLLABLE VI", 0x31, "Vai"),
    c(0xA533, None, "VAI SYLLABLE TI", 0x31, "Vai"),
    c(0xA534, None, "VAI SYLLABLE THI", 0x31, "Vai"),
    c(0xA535, None, "VAI SYLLABLE DHI", 0x31, "Vai"),
    c(0xA536, None, "VAI SYLLABLE DHHI", 0x31, "Vai"),
    c(0xA537, None, "VAI SYLLABLE LI", 0x31, "Vai"),
    c(0xA538, None, "VAI SYLLABLE RI", 0x31, "Vai"),
    c(0xA539, None, "VAI SYLLABLE DI", 0x31, "Vai"),
    c(0xA53A, None, "VAI SYLLABLE NDI", 0x31, "Vai"),
    c(0xA53B, None, "VAI SYLLABLE SI", 0x31, "Vai"),
    c(0xA53C, None, "VAI SYLLABLE SHI", 0x31, "Vai"),
    c(0xA53D, None, "VAI SYLLABLE ZI", 0x31, "Vai"),
    c(0xA53E, None, "VAI SYLLABLE ZHI", 0x31, "Vai"),
    c(0xA53F, None, "VAI SYLLABLE CI", 0x31, "Vai"),
    c(0xA540, None, "VAI SYLLABLE JI", 0x31, "Vai"),
    c(0xA541, None, "VAI SYLLABLE NJI", 0x31, "Vai"),
    c(0xA542, None, "VAI SYLLABLE YI", 0x31, "Vai"),
    c(0xA543, None, "VAI SYLLABLE KI", 0x31, "Vai"),
    c(0xA544, None, "VAI SYLLABLE NGGI", 0x31, "Vai"),
    c(0xA545, None, "VAI SYLLABLE GI", 0x31, "Vai"),
    c(0xA546, None, "VAI SYLLABLE MI", 0x31, "Vai"),
    c(0xA547, None, "VAI SYLLABLE NI", 0x31, "Vai"),
    c(0xA548, None, "VAI SYLLABLE NYI", 0x31, "Vai"),
    c(0xA549, None, "VAI SYLLABLE A", 0x31, "Vai"),
    c(0xA54A, None, "VAI SYLLABLE AN", 0x31, "Vai"),
    c(0xA54B, None, "VAI SYLLABLE NGAN", 0x31, "Vai"),
    c(0xA54C, None, "VAI SYLLABLE HA", 0x31, "Vai"),
    c(0xA54D, None, "VAI SYLLABLE HAN", 0x31, "Vai"),
    c(0xA54E, None, "VAI SYLLABLE WA", 0x31, "Vai"),
    c(0xA54F, None, "VAI SYLLABLE WAN", 0x31, "Vai"),
    c(0xA550, None, "VAI SYLLABLE PA", 0x31, "Vai"),
    c(0xA551, None, "VAI SYLLABLE BHA", 0x31, "Vai"),
    c(0xA552, None, "VAI SYLLABLE BA", 0x31, "Vai"),
    c(0xA553, None, "VAI SYLLABLE MBA", 0x31, "Vai"),
    c(0xA554, None, "VAI SYLLABLE KPA", 0x31, "Vai"),
    c(0xA555, None, "VAI SYLLABLE KPAN", 0x31, "Vai"),
    c(0xA556, None, "VAI SYLLABLE MGBA", 0x31, "Vai"),
    c(0xA557, None, "VAI SYLLABLE GBA", 0x31, "Vai"),
    c(0xA558, None, "VAI SYLLABLE FA", 0x31, "Vai"),
    c(0xA559, None, "VAI SYLLABLE VA", 0x31, "Vai"),
    c(0xA55A, None, "VAI SYLLABLE TA", 0x31, "Vai"),
    c(0xA55B, None, "VAI SYLLABLE THA", 0x31, "Vai"),
    c(0xA55C, None, "VAI SYLLABLE DHA", 0x31, "Vai"),
    c(0xA55D, None, "VAI SYLLABLE DHHA", 0x31, "Vai"),
    c(0xA55E, None, "VAI SYLLABLE LA", 0x31, "Vai"),
    c(0xA55F, None, "VAI SYLLABLE RA", 0x31, "Vai"),
    c(0xA560, None, "VAI SYLLABLE DA", 0x31, "Vai"),
    c(0xA561, None, "VAI SYLLABLE NDA", 0x31, "Vai"),
    c(0xA562, None, "VAI SYLLABLE SA", 0x31, "Vai"),
    c(0xA563, None, "VAI SYLLABLE SHA", 0x31, "Vai"),
    c(0xA564, None, "VAI SYLLABLE ZA", 0x31, "Vai"),
    c(0xA565, None, "VAI SYLLABLE ZHA", 0x31, "Vai"),
    c(0xA566, None, "VAI SYLLABLE CA", 0x31, "Vai"),
    c(0xA567, None, "VAI SYLLABLE JA", 0x31, "Vai"),
    c(0xA568, None, "VAI SYLLABLE NJA", 0x31, "Vai"),
    c(0xA569, None, "VAI SYLLABLE YA", 0x31, "Vai"),
    c(0xA56A, None, "VAI SYLLABLE KA", 0x31, "Vai"),
    c(0xA56B, None, "VAI SYLLABLE KAN", 0x31, "Vai"),
    c(0xA56C, None, "VAI SYLLABLE NGGA", 0x31, "Vai"),
    c(0xA56D, None, "VAI SYLLABLE GA", 0x31, "Vai"),
    c(0xA56E, None, "VAI SYLLABLE MA", 0x31, "Vai"),
    c(0xA56F, None, "VAI SYLLABLE NA", 0x31, "Vai"),
    c(0xA570, None, "VAI SYLLABLE NYA", 0x31, "Vai"),
    c(0xA571, None, "VAI SYLLABLE OO", 0x31, "Vai"),
    c(0xA572, None, "VAI SYLLABLE OON", 0x31, "Vai"),
    c(0xA573, None, "VAI SYLLABLE HOO", 0x31, "Vai"),
    c(0xA574, None, "VAI SYLLABLE WOO", 0x31, "Vai"),
    c(0xA575, None, "VAI SYLLABLE WOON", 0x31, "Vai"),
    c(0xA576, None, "VAI SYLLABLE POO", 0x31, "Vai"),
    c(0xA577, None, "VAI SYLLABLE BHOO", 0x31, "Vai"),
    c(0xA578, None, "VAI SYLLABLE BOO", 0x31, "Vai"),
    c(0xA579, None, "VAI SYLLABLE MBOO", 0x31, "Vai"),
    c(0xA57A, None, "VAI SYLLABLE KPOO", 0x31, "Vai"),
    c(0xA57B, None, "VAI SYLLABLE MGBOO", 0x31, "Vai"),
    c(0xA57C, None, "VAI SYLLABLE GBOO", 0x31, "Vai"),
    c(0xA57D, None, "VAI SYLLABLE FOO", 0x31, "Vai"),
    c(0xA57E, None, "VAI SYLLABLE VOO", 0x31, "Vai"),
    c(0xA57F, None, "VAI SYLLABLE TOO", 0x31, "Vai"),
    c(0xA580, None, "VAI SYLLABLE THOO", 0x31, "Vai"),
    c(0xA581, None, "VAI SYLLABLE DHOO", 0x31, "Vai"),
    c(0xA582, None, "VAI SYLLABLE DHHOO", 0x31, "Vai"),
    c(0xA583, None, "VAI SYLLABLE LOO", 0x31, "Vai"),
    c(0xA584, None, "VAI SYLLABLE ROO", 0x31, "Vai"),
    c(0xA585, None, "VAI SYLLABLE DOO", 0x31, "Vai"),
    c(0xA586, None, "VAI SYLLABLE NDOO", 0x31, "Vai"),
    c(0xA587, None, "VAI SYLLABLE SOO", 0x31, "Vai"),
    c(0xA588, None, "VAI SYLLABLE SHOO", 0x31, "Vai"),
    c(0xA589, None, "VAI SYLLABLE ZOO", 0x31, "Vai"),
    c(0xA58A, None, "VAI SYLLABLE ZHOO", 0x31, "Vai"),
    c(0xA58B, None, "VAI SYLLABLE COO", 0x31, "Vai"),
    c(0xA58C, None, "VAI SYLLABLE JOO", 0x31, "Vai"),
    c(0xA58D, None, "VAI SYLLABLE NJOO", 0x31, "Vai"),
    c(0xA58E, None, "VAI SYLLABLE YOO", 0x31, "Vai"),
    c(0xA58F, None, "VAI SYLLABLE KOO", 0x31, "Vai"),
    c(0xA590, None, "VAI SYLLABLE NGGOO", 0x31, "Vai"),
    c(0xA591, None, "VAI SYLLABLE GOO", 0x31, "Vai"),
    c(0xA592, None, "VAI SYLLABLE MOO", 0x31, "Vai"),
    c(0xA593, None, "VAI SYLLABLE NOO", 0x31, "Vai"),
    c(0xA594, None, "VAI SYLLABLE NYOO", 0x31, "Vai"),
    c(0xA595, None, "VAI SYLLABLE U", 0x31, "Vai"),
    c(0xA596, None, "VAI SYLLABLE UN", 0x31, "Vai"),
    c(0xA597, None, "VAI SYLLABLE HU", 0x31, "Vai"),
    c(0xA598, None, "VAI SYLLABLE HUN", 0x31, "Vai"),
    c(0xA599, None, "VAI SYLLABLE WU", 0x31, "Vai"),
    c(0xA59A, None, "VAI SYLLABLE WUN", 0x31, "Vai"),
    c(0xA59B, None, "VAI SYLLABLE PU", 0x31, "Vai"),
    c(0xA59C, None, "VAI SYLLABLE BHU", 0x31, "Vai"),
    c(0xA59D, None, "VAI SYLLABLE BU", 0x31, "Vai"),
    c(0xA59E, None, "VAI SYLLABLE MBU", 0x31, "Vai"),
    c(0xA59F, None, "VAI SYLLABLE KPU", 0x31, "Vai"),
    c(0xA5A0, None, "VAI SYLLABLE MGBU", 0x31, "Vai"),
    c(0xA5A1, None, "VAI SYLLABLE GBU", 0x31, "Vai"),
    c(0xA5A2, None, "VAI SYLLABLE FU", 0x31, "Vai"),
    c(0xA5A3, None, "VAI SYLLABLE VU", 0x31, "Vai"),
    c(0xA5A4, None, "VAI SYLLABLE TU", 0x31, "Vai"),
    c(0xA5A5, None, "VAI SYLLABLE THU", 0x31, "Vai"),
    c(0xA5A6, None, "VAI SYLLABLE DHU", 0x31, "Vai"),
    c(0xA5A7, None, "VAI SYLLABLE DHHU", 0x31, "Vai"),
    c(0xA5A8, None, "VAI SYLLABLE LU", 0x31, "Vai"),
    c(0xA5A9, None, "VAI SYLLABLE RU", 0x31, "Vai"),
    c(0xA5AA, None, "VAI SYLLABLE DU", 0x31, "Vai"),
    c(0xA5AB, None, "VAI SYLLABLE NDU", 0x31, "Vai"),
    c(0xA5AC, None, "VAI SYLLABLE SU", 0x31, "Vai"),
    c(0xA5AD, None, "VAI SYLLABLE SHU", 0x31, "Vai"),
    c(0xA5AE, None, "VAI SYLLABLE ZU", 0x31, "Vai"),
    c(0xA5AF, None, "VAI SYLLABLE ZHU", 0x31, "Vai"),
    c(0xA5B0, None, "VAI SYLLABLE CU", 0x31, "Vai"),
    c(0xA5B1, None, "VAI SYLLABLE JU", 0x31, "Vai"),
    c(0xA5B2, None, "VAI SYLLABLE NJU", 0x31, "Vai"),
    c(0xA5B3, None, "VAI SYLLABLE YU", 0x31, "Vai"),
    c(0xA5B4, None, "VAI SYLLABLE KU", 0x31, "Vai"),
    c(0xA5B5, None, "VAI SYLLABLE NGGU", 0x31, "Vai"),
    c(0xA5B6, None, "VAI SYLLABLE GU", 0x31, "Vai"),
    c(0xA5B7, None, "VAI SYLLABLE MU", 0x31, "Vai"),
    c(0xA5B8, None, "VAI SYLLABLE NU", 0x31, "Vai"),
    c(0xA5B9, None, "VAI SYLLABLE NYU", 0x31, "Vai"),
    c(0xA5BA, None, "VAI SYLLABLE O", 0x31, "Vai"),
    c(0xA5BB, None, "VAI SYLLABLE ON", 0x31, "Vai"),
    c(0xA5BC, None, "VAI SYLLABLE NGON", 0x31, "Vai"),
    c(0xA5BD, None, "VAI SYLLABLE HO", 0x31, "Vai"),
    c(0xA5BE, None, "VAI SYLLABLE HON", 0x31, "Vai"),
    c(0xA5BF, None, "VAI SYLLABLE WO", 0x31, "Vai"),
    c(0xA5C0, None, "VAI SYLLABLE WON", 0x31, "Vai"),
    c(0xA5C1, None, "VAI SYLLABLE PO", 0x31, "Vai"),
    c(0xA5C2, None, "VAI SYLLABLE BHO", 0x31, "Vai"),
    c(0xA5C3, None, "VAI SYLLABLE BO", 0x31, "Vai"),
    c(0xA5C4, None, "VAI SYLLABLE MBO", 0x31, "Vai"),
    c(0xA5C5, None, "VAI SYLLABLE KPO", 0x31, "Vai"),
    c(0xA5C6, None, "VAI SYLLABLE MGBO", 0x31, "Vai"),
    c(0xA5C7, None, "VAI SYLLABLE GBO", 0x31, "Vai"),
    c(0xA5C8, None, "VAI SYLLABLE GBON", 0x31, "Vai"),
    c(0xA5C9, None, "VAI SYLLABLE FO", 0x31, "Vai"),
    c(0xA5CA, None, "VAI SYLLABLE VO", 0x31, "Vai"),
    c(0xA5CB, None, "VAI SYLLABLE TO", 0x31, "Vai"),
    c(0xA5CC, None, "VAI SYLLABLE THO", 0x31, "Vai"),
    c(0xA5CD, None, "VAI SYLLABLE DHO", 0x31, "Vai"),
    c(0xA5CE, None, "VAI SYLLABLE DHHO", 0x31, "Vai"),
    c(0xA5CF, None, "VAI SYLLABLE LO", 0x31, "Vai"),
    c(0xA5D0, None, "VAI SYLLABLE RO", 0x31, "Vai"),
    c(0xA5D1, None, "VAI SYLLABLE DO", 0x31, "Vai"),
    c(0xA5D2, None, "VAI SYLLABLE NDO", 0x31, "Vai"),
    c(0xA5D3, None, "VAI SYLLABLE SO", 0x31, "Vai"),
    c(0xA5D4, None, "VAI SYLLABLE SHO", 0x31, "Vai"),
    c(0xA5D5, None, "VAI SYLLABLE ZO", 0x31, "Vai"),
    c(0xA5D6, None, "VAI SYLLABLE ZHO", 0x31, "Vai"),
    c(0xA5D7, None, "VAI SYLLABLE CO", 0x31, "Vai"),
    c(0xA5D8, None, "VAI SYLLABLE JO", 0x31, "Vai"),
    c(0xA5D9, None, "VAI SYLLABLE NJO", 0x31, "Vai"),
    c(0xA5DA, None, "VAI SYLLABLE YO", 0x31, "Vai"),
    c(0xA5DB, None, "VAI SYLLABLE KO", 0x31, "Vai"),
    c(0xA5DC, None, "VAI SYLLABLE NGGO", 0x31, "Vai"),
    c(0xA5DD, None, "VAI SYLLABLE GO", 0x31, "Vai"),
    c(0xA5DE, None, "VAI SYLLABLE MO", 0x31, "Vai"),
    c(0xA5DF, None, "VAI SYLLABLE NO", 0x31, "Vai"),
    c(0xA5E0, None, "VAI SYLLABLE NYO", 0x31, "Vai"),
    c(0xA5E1, None, "VAI SYLLABLE E", 0x31, "Vai"),
    c(0xA5E2, None, "VAI SYLLABLE EN", 0x31, "Vai"),
    c(0xA5E3, None, "VAI SYLLABLE NGEN", 0x31, "Vai"),
    c(0xA5E4, None, "VAI SYLLABLE HE", 0x31, "Vai"),
    c(0xA5E5, None, "VAI SYLLABLE HEN", 0x31, "Vai"),
    c(0xA5E6, None, "VAI SYLLABLE WE", 0x31, "Vai"),
    c(0xA5E7, None, "VAI SYLLABLE WEN", 0x31, "Vai"),
    c(0xA5E8, None, "VAI SYLLABLE PE", 0x31, "Vai"),
    c(0xA5E9, None, "VAI SYLLABLE BHE", 0x31, "Vai"),
    c(0xA5EA, None, "VAI SYLLABLE BE", 0x31, "Vai"),
    c(0xA5EB, None, "VAI SYLLABLE MBE", 0x31, "Vai"),
    c(0xA5EC, None, "VAI SYLLABLE KPE", 0x31, "Vai"),
    c(0xA5ED, None, "VAI SYLLABLE KPEN", 0x31, "Vai"),
    c(0xA5EE, None, "VAI SYLLABLE MGBE", 0x31, "Vai"),
    c(0xA5EF, None, "VAI SYLLABLE GBE", 0x31, "Vai"),
    c(0xA5F0, None, "VAI SYLLABLE GBEN", 0x31, "Vai"),
    c(0xA5F1, None, "VAI SYLLABLE FE", 0x31, "Vai"),
    c(0xA5F2, None, "VAI SYLLABLE VE", 0x31, "Vai"),
    c(0xA5F3, None, "VAI SYLLABLE TE", 0x31, "Vai"),
    c(0xA5F4, None, "VAI SYLLABLE THE", 0x31, "Vai"),
    c(0xA5F5, None, "VAI SYLLABLE DHE", 0x31, "Vai"),
    c(0xA5F6, None, "VAI SYLLABLE DHHE", 0x31, "Vai"),
    c(0xA5F7, None, "VAI SYLLABLE LE", 0x31, "Vai"),
    c(0xA5F8, None, "VAI SYLLABLE RE", 0x31, "Vai"),
    c(0xA5F9, None, "VAI SYLLABLE DE", 0x31, "Vai"),
    c(0xA5FA, None, "VAI SYLLABLE NDE", 0x31, "Vai"),
    c(0xA5FB, None, "VAI SYLLABLE SE", 0x31, "Vai"),
    c(0xA5FC, None, "VAI SYLLABLE SHE", 0x31, "Vai"),
    c(0xA5FD, None, "VAI SYLLABLE ZE", 0x31, "Vai"),
    c(0xA5FE, None, "VAI SYLLABLE ZHE", 0x31, "Vai"),
    c(0xA5FF, None, "VAI SYLLABLE CE", 0x31, "Vai"),
    c(0xA600, None, "VAI SYLLABLE JE", 0x31, "Vai"),
    c(0xA601, None, "VAI SYLLABLE NJE", 0x31, "Vai"),
    c(0xA602, None, "VAI SYLLABLE YE", 0x31, "Vai"),
    c(0xA603, None, "VAI SYLLABLE KE", 0x31, "Vai"),
    c(0xA604, None, "VAI SYLLABLE NGGE", 0x31, "Vai"),
    c(0xA605, None, "VAI SYLLABLE NGGEN", 0x31, "Vai"),
    c(0xA606, None, "VAI SYLLABLE GE", 0x31, "Vai"),
    c(0xA607, None, "VAI SYLLABLE GEN", 0x31, "Vai"),
    c(0xA608, None, "VAI SYLLABLE ME", 0x31, "Vai"),
    c(0xA609, None, "VAI SYLLABLE NE", 0x31, "Vai"),
    c(0xA60A, None, "VAI SYLLABLE NYE", 0x31, "Vai"),
    c(0xA60B, None, "VAI SYLLABLE NG", 0x31, "Vai"),
    c(0xA60C, None, "VAI SYLLABLE LENGTHENER", 0x31, "Vai"),
    c(0xA60D, None, "VAI COMMA", 0x00, "Vai"),
    c(0xA60E, None, "VAI FULL STOP", 0x00, "Vai"),
    c(0xA60F, None, "VAI QUESTION MARK", 0x00, "Vai"),
    c(0xA610, None, "VAI SYLLABLE NDOLE FA", 0x31, "Vai"),
    c(0xA611, None, "VAI SYLLABLE NDOLE KA", 0x31, "Vai"),
    c(0xA612, None, "VAI SYLLABLE NDOLE SOO", 0x31, "Vai"),
    c(0xA613, None, "VAI SYMBOL FEENG", 0x31, "Vai"),
    c(0xA614, None, "VAI SYMBOL KEENG", 0x31, "Vai"),
    c(0xA615, None, "VAI SYMBOL TING", 0x31, "Vai"),
    c(0xA616, None, "VAI SYMBOL NII", 0x31, "Vai"),
    c(0xA617, None, "VAI SYMBOL BANG", 0x31, "Vai"),
    c(0xA618, None, "VAI SYMBOL FAA", 0x31, "Vai"),
    c(0xA619, None, "VAI SYMBOL TAA", 0x31, "Vai"),
    c(0xA61A, None, "VAI SYMBOL DANG", 0x31, "Vai"),
    c(0xA61B, None, "VAI SYMBOL DOONG", 0x31, "Vai"),
    c(0xA61C, None, "VAI SYMBOL KUNG", 0x31, "Vai"),
    c(0xA61D, None, "VAI SYMBOL TONG", 0x31, "Vai"),
    c(0xA61E, None, "VAI SYMBOL DO-O", 0x31, "Vai"),
    c(0xA61F, None, "VAI SYMBOL JONG", 0x31, "Vai"),
    c(0xA620, None, "VAI DIGIT ZERO", 0x20, "Vai"),
    c(0xA621, None, "VAI DIGIT ONE", 0x20, "Vai"),
    c(0xA622, None, "VAI DIGIT TWO", 0x20, "Vai"),
    c(0xA623, None, "VAI DIGIT THREE", 0x20, "Vai"),
    c(0xA624, None, "VAI DIGIT FOUR", 0x20, "Vai"),
    c(0xA625, None, "VAI DIGIT FIVE", 0x20, "Vai"),
    c(0xA626, None, "VAI DIGIT SIX", 0x20, "Vai"),
    c(0xA627, None, "VAI DIGIT SEVEN", 0x20, "Vai"),
    c(0xA628, None, "VAI DIGIT EIGHT", 0x20, "Vai"),
    c(0xA629, None, "VAI DIGIT NINE", 0x20, "Vai"),
    c(0xA62A, None, "VAI SYLLABLE NDOLE MA", 0x31, "Vai"),
    c(0xA62B, None, "VAI SYLLABLE NDOLE DO", 0x31, "Vai"),
    c(0xA640, None, "CYRILLIC CAPITAL LETTER ZEMLYA", 0x31, "Cyrillic_Ext_B"),
    c(0xA641, None, "CYRILLIC SMALL LETTER ZEMLYA", 0x31, "Cyrillic_Ext_B"),
    c(0xA642, None, "CYRILLIC CAPITAL LETTER DZELO", 0x31, "Cyrillic_Ext_B"),
    c(0xA643, None, "CYRILLIC SMALL LETTER DZELO", 0x31, "Cyrillic_Ext_B"),
    c(0xA644, None, "CYRILLIC CAPITAL LETTER REVERSED DZE", 0x31, "Cyrillic_Ext_B"),
    c(0xA645, None, "CYRILLIC SMALL LETTER REVERSED DZE", 0x31, "Cyrillic_Ext_B"),
    c(0xA646, None, "CYRILLIC CAPITAL LETTER IOTA", 0x31, "Cyrillic_Ext_B"),
    c(0xA647, None, "CYRILLIC SMALL LETTER IOTA", 0x31, "Cyrillic_Ext_B"),
    c(0xA648, None, "CYRILLIC CAPITAL LETTER DJERV", 0x31, "Cyrillic_Ext_B"),
    c(0xA649, None, "CYRILLIC SMALL LETTER DJERV", 0x31, "Cyrillic_Ext_B"),
    c(0xA64A, None, "CYRILLIC CAPITAL LETTER MONOGRAPH UK", 0x31, "Cyrillic_Ext_B"),
    c(0xA64B, None, "CYRILLIC SMALL LETTER MONOGRAPH UK", 0x31, "Cyrillic_Ext_B"),
    c(0xA64C, None, "CYRILLIC CAPITAL LETTER BROAD OMEGA", 0x31, "Cyrillic_Ext_B"),
    c(0xA64D, None, "CYRILLIC SMALL LETTER BROAD OMEGA", 0x31, "Cyrillic_Ext_B"),
    c(0xA64E, None, "CYRILLIC CAPITAL LETTER NEUTRAL YER", 0x31, "Cyrillic_Ext_B"),
    c(0xA64F, None, "CYRILLIC SMALL LETTER NEUTRAL YER", 0x31, "Cyrillic_Ext_B"),
    c(0xA650, None, "CYRILLIC CAPITAL LETTER YERU WITH BACK YER", 0x31, "Cyrillic_Ext_B"),
    c(0xA651, None, "CYRILLIC SMALL LETTER YERU WITH BACK YER", 0x31, "Cyrillic_Ext_B"),
    c(0xA652, None, "CYRILLIC CAPITAL LETTER IOTIFIED YAT", 0x31, "Cyrillic_Ext_B"),
    c(0xA653, None, "CYRILLIC SMALL LETTER IOTIFIED YAT", 0x31, "Cyrillic_Ext_B"),
    c(0xA654, None, "CYRILLIC CAPITAL LETTER REVERSED YU", 0x31, "Cyrillic_Ext_B"),
    c(0xA655, None, "CYRILLIC SMALL LETTER REVERSED YU", 0x31, "Cyrillic_Ext_B"),
    c(0xA656, None, "CYRILLIC CAPITAL LETTER IOTIFIED A", 0x31, "Cyrillic_Ext_B"),
    c(0xA657, None, "CYRILLIC SMALL LETTER IOTIFIED A", 0x31, "Cyrillic_Ext_B"),
    c(0xA658, None, "CYRILLIC CAPITAL LETTER CLOSED LITTLE YUS", 0x31, "Cyrillic_Ext_B"),
    c(0xA659, None, "CYRILLIC SMALL LETTER CLOSED LITTLE YUS", 0x31, "Cyrillic_Ext_B"),
    c(0xA65A, None, "CYRILLIC CAPITAL LETTER BLENDED YUS", 0x31, "Cyrillic_Ext_B"),
    c(0xA65B, None, "CYRILLIC SMALL LETTER BLENDED YUS", 0x31, "Cyrillic_Ext_B"),
    c(0xA65C, None, "CYRILLIC CAPITAL LETTER IOTIFIED CLOSED LITTLE YUS", 0x31, "Cyrillic_Ext_B"),
    c(0xA65D, None, "CYRILLIC SMALL LETTER IOTIFIED CLOSED LITTLE YUS", 0x31, "Cyrillic_Ext_B"),
    c(0xA65E, None, "CYRILLIC CAPITAL LETTER YN", 0x31, "Cyrillic_Ext_B"),
    c(0xA65F, None, "CYRILLIC SMALL LETTER YN", 0x31, "Cyrillic_Ext_B"),
    c(0xA660, None, "CYRILLIC CAPITAL LETTER REVERSED TSE", 0x31, "Cyrillic_Ext_B"),
    c(0xA661, None, "CYRILLIC SMALL LETTER REVERSED TSE", 0x31, "Cyrillic_Ext_B"),
    c(0xA662, None, "CYRILLIC CAPITAL LETTER SOFT DE", 0x31, "Cyrillic_Ext_B"),
    c(0xA663, None, "CYRILLIC SMALL LETTER SOFT DE", 0x31, "Cyrillic_Ext_B"),
    c(0xA664, None, "CYRILLIC CAPITAL LETTER SOFT EL", 0x31, "Cyrillic_Ext_B"),
    c(0xA665, None, "CYRILLIC SMALL LETTER SOFT EL", 0x31, "Cyrillic_Ext_B"),
    c(0xA666, None, "CYRILLIC CAPITAL LETTER SOFT EM", 0x31, "Cyrillic_Ext_B"),
    c(0xA667, None, "CYRILLIC SMALL LETTER SOFT EM", 0x31, "Cyrillic_Ext_B"),
    c(0xA668, None, "CYRILLIC CAPITAL LETTER MONOCULAR O", 0x31, "Cyrillic_Ext_B"),
    c(0xA669, None, "CYRILLIC SMALL LETTER MONOCULAR O", 0x31, "Cyrillic_Ext_B"),
    c(0xA66A, None, "CYRILLIC CAPITAL LETTER BINOCULAR O", 0x31, "Cyrillic_Ext_B"),
    c(0xA66B, None, "CYRILLIC SMALL LETTER BINOCULAR O", 0x31, "Cyrillic_Ext_B"),
    c(0xA66C, None, "CYRILLIC CAPITAL LETTER DOUBLE MONOCULAR O", 0x31, "Cyrillic_Ext_B"),
    c(0xA66D, None, "CYRILLIC SMALL LETTER DOUBLE MONOCULAR O", 0x31, "Cyrillic_Ext_B"),
    c(0xA66E, None, "CYRILLIC LETTER MULTIOCULAR O", 0x31, "Cyrillic_Ext_B"),
    c(0xA66F, None, "COMBINING CYRILLIC VZMET", 0x20, "Cyrillic_Ext_B"),
    c(0xA670, None, "COMBINING CYRILLIC TEN MILLIONS SIGN", 0x00, "Cyrillic_Ext_B"),
    c(0xA671, None, "COMBINING CYRILLIC HUNDRED MILLIONS SIGN", 0x00, "Cyrillic_Ext_B"),
    c(0xA672, None, "COMBINING CYRILLIC THOUSAND MILLIONS SIGN", 0x00, "Cyrillic_Ext_B"),
    c(0xA673, None, "SLAVONIC ASTERISK", 0x00, "Cyrillic_Ext_B"),
    c(0xA674, None, "COMBINING CYRILLIC LETTER UKRAINIAN IE", 0x21, "Cyrillic_Ext_B"),
    c(0xA675, None, "COMBINING CYRILLIC LETTER I", 0x21, "Cyrillic_Ext_B"),
    c(0xA676, None, "COMBINING CYRILLIC LETTER YI", 0x21, "Cyrillic_Ext_B"),
    c(0xA677, None, "COMBINING CYRILLIC LETTER U", 0x21, "Cyrillic_Ext_B"),
    c(0xA678, None, "COMBINING CYRILLIC LETTER HARD SIGN", 0x21, "Cyrillic_Ext_B"),
    c(0xA679, None, "COMBINING CYRILLIC LETTER YERU", 0x21, "Cyrillic_Ext_B"),
    c(0xA67A, None, "COMBINING CYRILLIC LETTER SOFT SIGN", 0x21, "Cyrillic_Ext_B"),
    c(0xA67B, None, "COMBINING CYRILLIC LETTER OMEGA", 0x21, "Cyrillic_Ext_B"),
    c(0xA67C, None, "COMBINING CYRILLIC KAVYKA", 0x20, "Cyrillic_Ext_B"),
    c(0xA67D, None, "COMBINING CYRILLIC PAYEROK", 0x20, "Cyrillic_Ext_B"),
    c(0xA67E, None, "CYRILLIC KAVYKA", 0x00, "Cyrillic_Ext_B"),
    c(0xA67F, None, "CYRILLIC PAYEROK", 0x31, "Cyrillic_Ext_B"),
    c(0xA680, None, "CYRILLIC CAPITAL LETTER DWE", 0x31, "Cyrillic_Ext_B"),
    c(0xA681, None, "CYRILLIC SMALL LETTER DWE", 0x31, "Cyrillic_Ext_B"),
    c(0xA682, None, "CYRILLIC CAPITAL LETTER DZWE", 0x31, "Cyrillic_Ext_B"),
    c(0xA683, None, "CYRILLIC SMALL LETTER DZWE", 0x31, "Cyrillic_Ext_B"),
    c(0xA684, None, "CYRILLIC CAPITAL LETTER ZHWE", 0x31, "Cyrillic_Ext_B"),
    c(0xA685, None, "CYRILLIC SMALL LETTER ZHWE", 0x31, "Cyrillic_Ext_B"),
    c(0xA686, None, "CYRILLIC CAPITAL LETTER CCHE", 0x31, "Cyrillic_Ext_B"),
    c(0xA687, None, "CYRILLIC SMALL LETTER CCHE", 0x31, "Cyrillic_Ext_B"),
    c(0xA688, None, "CYRILLIC CAPITAL LETTER DZZE", 0x31, "Cyrillic_Ext_B"),
    c(0xA689, None, "CYRILLIC SMALL LETTER DZZE", 0x31, "Cyrillic_Ext_B"),
    c(0xA68A, None, "CYRILLIC CAPITAL LETTER TE WITH MIDDLE HOOK", 0x31, "Cyrillic_Ext_B"),
    c(0xA68B, None, "CYRILLIC SMALL LETTER TE WITH MIDDLE HOOK", 0x31, "Cyrillic_Ext_B"),
    c(0xA68C, None, "CYRILLIC CAPITAL LETTER TWE", 0x31, "Cyrillic_Ext_B"),
    c(0xA68D, None, "CYRILLIC SMALL LETTER TWE", 0x31, "Cyrillic_Ext_B"),
    c(0xA68E, None, "CYRILLIC CAPITAL LETTER TSWE", 0x31, "Cyrillic_Ext_B"),
    c(0xA68F, None, "CYRILLIC SMALL LETTER TSWE", 0x31, "Cyrillic_Ext_B"),
    c(0xA690, None, "CYRILLIC CAPITAL LETTER TSSE", 0x31, "Cyrillic_Ext_B"),
    c(0xA691, None, "CYRILLIC SMALL LETTER TSSE", 0x31, "Cyrillic_Ext_B"),
    c(0xA692, None, "CYRILLIC CAPITAL LETTER TCHE", 0x31, "Cyrillic_Ext_B"),
    c(0xA693, None, "CYRILLIC SMALL LETTER TCHE", 0x31, "Cyrillic_Ext_B"),
    c(0xA694, None, "CYRILLIC CAPITAL LETTER HWE", 0x31, "Cyrillic_Ext_B"),
    c(0xA695, None, "CYRILLIC SMALL LETTER HWE", 0x31, "Cyrillic_Ext_B"),
    c(0xA696, None, "CYRILLIC CAPITAL LETTER SHWE", 0x31, "Cyrillic_Ext_B"),
    c(0xA697, None, "CYRILLIC SMALL LETTER SHWE", 0x31, "Cyrillic_Ext_B"),
    c(0xA698, None, "CYRILLIC CAPITAL LETTER DOUBLE O", 0x31, "Cyrillic_Ext_B"),
    c(0xA699, None, "CYRILLIC SMALL LETTER DOUBLE O", 0x31, "Cyrillic_Ext_B"),
    c(0xA69A, None, "CYRILLIC CAPITAL LETTER CROSSED O", 0x31, "Cyrillic_Ext_B"),
    c(0xA69B, None, "CYRILLIC SMALL LETTER CROSSED O", 0x31, "Cyrillic_Ext_B"),
    c(0xA69C, None, "MODIFIER LETTER CYRILLIC HARD SIGN", 0x31, "Cyrillic_Ext_B"),
    c(0xA69D, None, "MODIFIER LETTER CYRILLIC SOFT SIGN", 0x31, "Cyrillic_Ext_B"),
    c(0xA69E, None, "COMBINING CYRILLIC LETTER EF", 0x21, "Cyrillic_Ext_B"),
    c(0xA69F, None, "COMBINING CYRILLIC LETTER IOTIFIED E", 0x21, "Cyrillic_Ext_B"),
    c(0xA6A0, None, "BAMUM LETTER A", 0x31, "Bamum"),
    c(0xA6A1, None, "BAMUM LETTER KA", 0x31, "Bamum"),
    c(0xA6A2, None, "BAMUM LETTER U", 0x31, "Bamum"),
    c(0xA6A3, None, "BAMUM LETTER KU", 0x31, "Bamum"),
    c(0xA6A4, None, "BAMUM LETTER EE", 0x31, "Bamum"),
    c(0xA6A5, None, "BAMUM LETTER REE", 0x31, "Bamum"),
    c(0xA6A6, None, "BAMUM LETTER TAE", 0x31, "Bamum"),
    c(0xA6A7, None, "BAMUM LETTER O", 0x31, "Bamum"),
    c(0xA6A8, None, "BAMUM LETTER NYI", 0x31, "Bamum"),
    c(0xA6A9, None, "BAMUM LETTER I", 0x31, "Bamum"),
    c(0xA6AA, None, "BAMUM LETTER LA", 0x31, "Bamum"),
    c(0xA6AB, None, "BAMUM LETTER PA", 0x31, "Bamum"),
    c(0xA6AC, None, "BAMUM LETTER RII", 0x31, "Bamum"),
    c(0xA6AD, None, "BAMUM LETTER RIEE", 0x31, "Bamum"),
    c(0xA6AE, None, "BAMUM LETTER LEEEE", 0x31, "Bamum"),
    c(0xA6AF, None, "BAMUM LETTER MEEEE", 0x31, "Bamum"),
    c(0xA6B0, None, "BAMUM LETTER TAA", 0x31, "Bamum"),
    c(0xA6B1, None, "BAMUM LETTER NDAA", 0x31, "Bamum"),
    c(0xA6B2, None, "BAMUM LETTER NJAEM", 0x31, "Bamum"),
    c(0xA6B3, None, "BAMUM LETTER M", 0x31, "Bamum"),
    c(0xA6B4, None, "BAMUM LETTER SUU", 0x31, "Bamum"),
    c(0xA6B5, None, "BAMUM LETTER MU", 0x31, "Bamum"),
    c(0xA6B6, None, "BAMUM LETTER SHII", 0x31, "Bamum"),
    c(0xA6B7, None, "BAMUM LETTER SI", 0x31, "Bamum"),
    c(0xA6B8, None, "BAMUM LETTER SHEUX", 0x31, "Bamum"),
    c(0xA6B9, None, "BAMUM LETTER SEUX", 0x31, "Bamum"),
    c(0xA6BA, None, "BAMUM LETTER KYEE", 0x31, "Bamum"),
    c(0xA6BB, None, "BAMUM LETTER KET", 0x31, "Bamum"),
    c(0xA6BC, None, "BAMUM LETTER NUAE", 0x31, "Bamum"),
    c(0xA6BD, None, "BAMUM LETTER NU", 0x31, "Bamum"),
    c(0xA6BE, None, "BAMUM LETTER NJUAE", 0x31, "Bamum"),
    c(0xA6BF, None, "BAMUM LETTER YOQ", 0x31, "Bamum"),
    c(0xA6C0, None, "BAMUM LETTER SHU", 0x31, "Bamum"),
    c(0xA6C1, None, "BAMUM LETTER YUQ", 0x31, "Bamum"),
    c(0xA6C2, None, "BAMUM LETTER YA", 0x31, "Bamum"),
    c(0xA6C3, None, "BAMUM LETTER NSHA", 0x31, "Bamum"),
    c(0xA6C4, None, "BAMUM LETTER KEUX", 0x31, "Bamum"),
    c(0xA6C5, None, "BAMUM LETTER PEUX", 0x31, "Bamum"),
    c(0xA6C6, None, "BAMUM LETTER NJEE", 0x31, "Bamum"),
    c(0xA6C7, None, "BAMUM LETTER NTEE", 0x31, "Bamum"),
    c(0xA6C8, None, "BAMUM LETTER PUE", 0x31, "Bamum"),
    c(0xA6C9, None, "BAMUM LETTER WUE", 0x31, "Bamum"),
    c(0xA6CA, None, "BAMUM LETTER PEE", 0x31, "Bamum"),
    c(0xA6CB, None, "BAMUM LETTER FEE", 0x31, "Bamum"),
    c(0xA6CC, None, "BAMUM LETTER RU", 0x31, "Bamum"),
    c(0xA6CD, None, "BAMUM LETTER LU", 0x31, "Bamum"),
    c(0xA6CE, None, "BAMUM LETTER MI", 0x31, "Bamum"),
    c(0xA6CF, None, "BAMUM LETTER NI", 0x31, "Bamum"),
    c(0xA6D0, None, "BAMUM LETTER REUX", 0x31, "Bamum"),
    c(0xA6D1, None, "BAMUM LETTER RAE", 0x31, "Bamum"),
    c(0xA6D2, None, "BAMUM LETTER KEN", 0x31, "Bamum"),
    c(0xA6D3, None, "BAMUM LETTER NGKWAEN", 0x31, "Bamum"),
    c(0xA6D4, None, "BAMUM LETTER NGGA", 0x31, "Bamum"),
    c(0xA6D5, None, "BAMUM LETTER NGA", 0x31, "Bamum"),
    c(0xA6D6, None, "BAMUM LETTER SHO", 0x31, "Bamum"),
    c(0xA6D7, None, "BAMUM LETTER PUAE", 0x31, "Bamum"),
    c(0xA6D8, None, "BAMUM LETTER FU", 0x31, "Bamum"),
    c(0xA6D9, None, "BAMUM LETTER FOM", 0x31, "Bamum"),
    c(0xA6DA, None, "BAMUM LETTER WA", 0x31, "Bamum"),
    c(0xA6DB, None, "BAMUM LETTER NA", 0x31, "Bamum"),
    c(0xA6DC, None, "BAMUM LETTER LI", 0x31, "Bamum"),
    c(0xA6DD, None, "BAMUM LETTER PI", 0x31, "Bamum"),
    c(0xA6DE, None, "BAMUM LETTER LOQ", 0x31, "Bamum"),
    c(0xA6DF, None, "BAMUM LETTER KO", 0x31, "Bamum"),
    c(0xA6E0, None, "BAMUM LETTER MBEN", 0x31, "Bamum"),
    c(0xA6E1, None, "BAMUM LETTER REN", 0x31, "Bamum"),
    c(0xA6E2, None, "BAMUM LETTER MEN", 0x31, "Bamum"),
    c(0xA6E3, None, "BAMUM LETTER MA", 0x31, "Bamum"),
    c(0xA6E4, None, "BAMUM LETTER TI", 0x31, "Bamum"),
    c(0xA6E5, None, "BAMUM LETTER KI", 0x31, "Bamum"),
    c(0xA6E6, None, "BAMUM LETTER MO", 0x31, "Bamum"),
    c(0xA6E7, None, "BAMUM LETTER MBAA", 0x31, "Bamum"),
    c(0xA6E8, None, "BAMUM LETTER TET", 0x31, "Bamum"),
    c(0xA6E9, None, "BAMUM LETTER KPA", 0x31, "Bamum"),
    c(0xA6EA, None, "BAMUM LETTER TEN", 0x31, "Bamum"),
    c(0xA6EB, None, "BAMUM LETTER NTUU", 0x31, "Bamum"),
    c(0xA6EC, None, "BAMUM LETTER SAMBA", 0x31, "Bamum"),
    c(0xA6ED, None, "BAMUM LETTER FAAMAE", 0x31, "Bamum"),
    c(0xA6EE, None, "BAMUM LETTER KOVUU", 0x31, "Bamum"),
    c(0xA6EF, None, "BAMUM LETTER KOGHOM", 0x31, "Bamum"),
    c(0xA6F0, None, "BAMUM COMBINING MARK KOQNDON", 0x20, "Bamum"),
    c(0xA6F1, None, "BAMUM COMBINING MARK TUKWENTIS", 0x20, "Bamum"),
    c(0xA6F2, None, "BAMUM NJAEMLI", 0x00, "Bamum"),
    c(0xA6F3, None, "BAMUM FULL STOP", 0x00, "Bamum"),
    c(0xA6F4, None, "BAMUM COLON", 0x00, "Bamum"),
    c(0xA6F5, None, "BAMUM COMMA", 0x00, "Bamum"),
    c(0xA6F6, None, "BAMUM SEMICOLON", 0x00, "Bamum"),
    c(0xA6F7, None, "BAMUM QUESTION MARK", 0x00, "Bamum"),
    c(0xA700, None, "MODIFIER LETTER CHINESE TONE YIN PING", 0x00, "Modifier_Tone_Letters"),
    c(0xA701, None, "MODIFIER LETTER CHINESE TONE YANG PING", 0x00, "Modifier_Tone_Letters"),
    c(0xA702, None, "MODIFIER LETTER CHINESE TONE YIN SHANG", 0x00, "Modifier_Tone_Letters"),
    c(0xA703, None, "MODIFIER LETTER CHINESE TONE YANG SHANG", 0x00, "Modifier_Tone_Letters"),
    c(0xA704, None, "MODIFIER LETTER CHINESE TONE YIN QU", 0x00, "Modifier_Tone_Letters"),
    c(0xA705, None, "MODIFIER LETTER CHINESE TONE YANG QU", 0x00, "Modifier_Tone_Letters"),
    c(0xA706, None, "MODIFIER LETTER CHINESE TONE YIN RU", 0x00, "Modifier_Tone_Letters"),
    c(0xA707, None, "MODIFIER LETTER CHINESE TONE YANG RU", 0x00, "Modifier_Tone_Letters"),
    c(0xA708, None, "MODIFIER LETTER EXTRA-HIGH DOTTED TONE BAR", 0x00, "Modifier_Tone_Letters"),
    c(0xA709, None, "MODIFIER LETTER HIGH DOTTED TONE BAR", 0x00, "Modifier_Tone_Letters"),
    c(0xA70A, None, "MODIFIER LETTER MID DOTTED TONE BAR", 0x00, "Modifier_Tone_Letters"),
    c(0xA70B, None, "MODIFIER LETTER LOW DOTTED TONE BAR", 0x00, "Modifier_Tone_Letters"),
    c(0xA70C, None, "MODIFIER LETTER EXTRA-LOW DOTTED TONE BAR", 0x00, "Modifier_Tone_Letters"),
    c(0xA70D, None, "MODIFIER LETTER EXTRA-HIGH DOTTED LEFT-STEM TONE BAR", 0x00, "Modifier_Tone_Letters"),
    c(0xA70E, None, "MODIFIER LETTER HIGH DOTTED LEFT-STEM TONE BAR", 0x00, "Modifier_Tone_Letters"),
    c(0xA70F, None, "MODIFIER LETTER MID DOTTED LEFT-STEM TONE BAR", 0x00, "Modifier_Tone_Letters"),
    c(0xA710, None, "MODIFIER LETTER LOW DOTTED LEFT-STEM TONE BAR", 0x00, "Modifier_Tone_Letters"),
    c(0xA711, None, "MODIFIER LETTER EXTRA-LOW DOTTED LEFT-STEM TONE BAR", 0x00, "Modifier_Tone_Letters"),
    c(0xA712, None, "MODIFIER LETTER EXTRA-HIGH LEFT-STEM TONE BAR", 0x00, "Modifier_Tone_Letters"),
    c(0xA713, None, "MODIFIER LETTER HIGH LEFT-STEM TONE BAR", 0x00, "Modifier_Tone_Letters"),
    c(0xA714, None, "MODIFIER LETTER MID LEFT-STEM TONE BAR", 0x00, "Modifier_Tone_Letters"),
    c(0xA715, None, "MODIFIER LETTER LOW LEFT-STEM TONE BAR", 0x00, "Modifier_Tone_Letters"),
    c(0xA716, None, "MODIFIER LETTER EXTRA-LOW LEFT-STEM TONE BAR", 0x00, "Modifier_Tone_Letters"),
    c(0xA717, None, "MODIFIER LETTER DOT VERTICAL BAR", 0x31, "Modifier_Tone_Letters"),
    c(0xA718, None, "MODIFIER LETTER DOT SLASH", 0x31, "Modifier_Tone_Letters"),
    c(0xA719, None, "MODIFIER LETTER DOT HORIZONTAL BAR", 0x31, "Modifier_Tone_Letters"),
    c(0xA71A, None, "MODIFIER LETTER LOWER RIGHT CORNER ANGLE", 0x31, "Modifier_Tone_Letters"),
    c(0xA71B, None, "MODIFIER LETTER RAISED UP ARROW", 0x31, "Modifier_Tone_Letters"),
    c(0xA71C, None, "MODIFIER LETTER RAISED DOWN ARROW", 0x31, "Modifier_Tone_Letters"),
    c(0xA71D, None, "MODIFIER LETTER RAISED EXCLAMATION MARK", 0x31, "Modifier_Tone_Letters"),
    c(0xA71E, None, "MODIFIER LETTER RAISED INVERTED EXCLAMATION MARK", 0x31, "Modifier_Tone_Letters"),
    c(0xA71F, None, "MODIFIER LETTER LOW INVERTED EXCLAMATION MARK", 0x31, "Modifier_Tone_Letters"),
    c(0xA720, None, "MODIFIER LETTER STRESS AND HIGH TONE", 0x00, "Latin_Ext_D"),
    c(0xA721, None, "MODIFIER LETTER STRESS AND LOW TONE", 0x00, "Latin_Ext_D"),
    c(0xA722, None, "LATIN CAPITAL LETTER EGYPTOLOGICAL ALEF", 0x31, "Latin_Ext_D"),
    c(0xA723, None, "LATIN SMALL LETTER EGYPTOLOGICAL ALEF", 0x31, "Latin_Ext_D"),
    c(0xA724, None, "LATIN CAPITAL LETTER EGYPTOLOGICAL AIN", 0x31, "Latin_Ext_D"),
    c(0xA725, None, "LATIN SMALL LETTER EGYPTOLOGICAL AIN", 0x31, "Latin_Ext_D"),
    c(0xA726, None, "LATIN CAPITAL LETTER HENG", 0x31, "Latin_Ext_D"),
    c(0xA727, None, "LATIN SMALL LETTER HENG", 0x31, "Latin_Ext_D"),
    c(0xA728, None, "LATIN CAPITAL LETTER TZ", 0x31, "Latin_Ext_D"),
    c(0xA729, None, "LATIN SMALL LETTER TZ", 0x31, "Latin_Ext_D"),
    c(0xA72A, None, "LATIN CAPITAL LETTER TRESILLO", 0x31, "Latin_Ext_D"),
    c(0xA72B, None, "LATIN SMALL LETTER TRESILLO", 0x31, "Latin_Ext_D"),
    c(0xA72C, None, "LATIN CAPITAL LETTER CUATRILLO", 0x31, "Latin_Ext_D"),
    c(0xA72D, None, "LATIN SMALL LETTER CUATRILLO", 0x31, "Latin_Ext_D"),
    c(0xA72E, None, "LATIN CAPITAL LETTER CUATRILLO WITH COMMA", 0x31, "Latin_Ext_D"),
    c(0xA72F, None, "LATIN SMALL LETTER CUATRILLO WITH COMMA", 0x31, "Latin_Ext_D"),
    c(0xA730, None, "LATIN LETTER SMALL CAPITAL F", 0x31, "Latin_Ext_D"),
    c(0xA731, None, "LATIN LETTER SMALL CAPITAL S", 0x31, "Latin_Ext_D"),
    c(0xA732, None, "LATIN CAPITAL LETTER AA", 0x31, "Latin_Ext_D"),
    c(0xA733, None, "LATIN SMALL LETTER AA", 0x31, "Latin_Ext_D"),
    c(0xA734, None, "LATIN CAPITAL LETTER AO", 0x31, "Latin_Ext_D"),
    c(0xA735, None, "LATIN SMALL LETTER AO", 0x31, "Latin_Ext_D"),
    c(0xA736, None, "LATIN CAPITAL LETTER AU", 0x31, "Latin_Ext_D"),
    c(0xA737, None, "LATIN SMALL LETTER AU", 0x31, "Latin_Ext_D"),
    c(0xA738, None, "LATIN CAPITAL LETTER AV", 0x31, "Latin_Ext_D"),
    c(0xA739, None, "LATIN SMALL LETTER AV", 0x31, "Latin_Ext_D"),
    c(0xA73A, None, "LATIN CAPITAL LETTER AV WITH HORIZONTAL BAR", 0x31, "Latin_Ext_D"),
    c(0xA73B, None, "LATIN SMALL LETTER AV WITH HORIZONTAL BAR", 0x31, "Latin_Ext_D"),
    c(0xA73C, None, "LATIN CAPITAL LETTER AY", 0x31, "Latin_Ext_D"),
    c(0xA73D, None, "LATIN SMALL LETTER AY", 0x31, "Latin_Ext_D"),
    c(0xA73E, None, "LATIN CAPITAL LETTER REVERSED C WITH DOT", 0x31, "Latin_Ext_D"),
    c(0xA73F, None, "LATIN SMALL LETTER REVERSED C WITH DOT", 0x31, "Latin_Ext_D"),
    c(0xA740, None, "LATIN CAPITAL LETTER K WITH STROKE", 0x31, "Latin_Ext_D"),
    c(0xA741, None, "LATIN SMALL LETTER K WITH STROKE", 0x31, "Latin_Ext_D"),
    c(0xA742, None, "LATIN CAPITAL LETTER K WITH DIAGONAL STROKE", 0x31, "Latin_Ext_D"),
    c(0xA743, None, "LATIN SMALL LETTER K WITH DIAGONAL STROKE", 0x31, "Latin_Ext_D"),
    c(0xA744, None, "LATIN CAPITAL LETTER K WITH STROKE AND DIAGONAL STROKE", 0x31, "Latin_Ext_D"),
    c(0xA745, None, "LATIN SMALL LETTER K WITH STROKE AND DIAGONAL STROKE", 0x31, "Latin_Ext_D"),
    c(0xA746, None, "LATIN CAPITAL LETTER BROKEN L", 0x31, "Latin_Ext_D"),
    c(0xA747, None, "LATIN SMALL LETTER BROKEN L", 0x31, "Latin_Ext_D"),
    c(0xA748, None, "LATIN CAPITAL LETTER L WITH HIGH STROKE", 0x31, "Latin_Ext_D"),
    c(0xA749, None, "LATIN SMALL LETTER L WITH HIGH STROKE", 0x31, "Latin_Ext_D"),
    c(0xA74A, None, "LATIN CAPITAL LETTER O WITH LONG STROKE OVERLAY", 0x31, "Latin_Ext_D"),
    c(0xA74B, None, "LATIN SMALL LETTER O WITH LONG STROKE OVERLAY", 0x31, "Latin_Ext_D"),
    c(0xA74C, None, "LATIN CAPITAL LETTER O WITH LOOP", 0x31, "Latin_Ext_D"),
    c(0xA74D, None, "LATIN SMALL LETTER O WITH LOOP", 0x31, "Latin_Ext_D"),
    c(0xA74E, None, "LATIN CAPITAL LETTER OO", 0x31, "Latin_Ext_D"),
    c(0xA74F, None, "LATIN SMALL LETTER OO", 0x31, "Latin_Ext_D"),
    c(0xA750, None, "LATIN CAPITAL LETTER P WITH STROKE THROUGH DESCENDER", 0x31, "Latin_Ext_D"),
    c(0xA751, None, "LATIN SMALL LETTER P WITH STROKE THROUGH DESCENDER", 0x31, "Latin_Ext_D"),
    c(0xA752, None, "LATIN CAPITAL LETTER P WITH FLOURISH", 0x31, "Latin_Ext_D"),
    c(0xA753, None, "LATIN SMALL LETTER P WITH FLOURISH", 0x31, "Latin_Ext_D"),
    c(0xA754, None, "LATIN CAPITAL LETTER P WITH SQUIRREL TAIL", 0x31, "Latin_Ext_D"),
    c(0xA755, None, "LATIN SMALL LETTER P WITH SQUIRREL TAIL", 0x31, "Latin_Ext_D"),
    c(0xA756, None, "LATIN CAPITAL LETTER Q WITH STROKE THROUGH DESCENDER", 0x31, "Latin_Ext_D"),
    c(0xA757, None, "LATIN SMALL LETTER Q WITH STROKE THROUGH DESCENDER", 0x31, "Latin_Ext_D"),
    c(0xA758, None, "LATIN CAPITAL LETTER Q WITH DIAGONAL STROKE", 0x31, "Latin_Ext_D"),
    c(0xA759, None, "LATIN SMALL LETTER Q WITH DIAGONAL STROKE", 0x31, "Latin_Ext_D"),
    c(0xA75A, None, "LATIN CAPITAL LETTER R ROTUNDA", 0x31, "Latin_Ext_D"),
    c(0xA75B, None, "LATIN SMALL LETTER R ROTUNDA", 0x31, "Latin_Ext_D"),
    c(0xA75C, None, "LATIN CAPITAL LETTER RUM ROTUNDA", 0x31, "Latin_Ext_D"),
    c(0xA75D, None, "LATIN SMALL LETTER RUM ROTUNDA", 0x31, "Latin_Ext_D"),
    c(0xA75E, None, "LATIN CAPITAL LETTER V WITH DIAGONAL STROKE", 0x31, "Latin_Ext_D"),
    c(0xA75F, None, "LATIN SMALL LETTER V WITH DIAGONAL STROKE", 0x31, "Latin_Ext_D"),
    c(0xA760, None, "LATIN CAPITAL LETTER VY", 0x31, "Latin_Ext_D"),
    c(0xA761, None, "LATIN SMALL LETTER VY", 0x31, "Latin_Ext_D"),
    c(0xA762, None, "LATIN CAPITAL LETTER VISIGOTHIC Z", 0x31, "Latin_Ext_D"),
    c(0xA763, None, "LATIN SMALL LETTER VISIGOTHIC Z", 0x31, "Latin_Ext_D"),
    c(0xA764, None, "LATIN CAPITAL LETTER THORN WITH STROKE", 0x31, "Latin_Ext_D"),
    c(0xA765, None, "LATIN SMALL LETTER THORN WITH STROKE", 0x31, "Latin_Ext_D"),
    c(0xA766, None, "LATIN CAPITAL LETTER THORN WITH STROKE THROUGH DESCENDER", 0x31, "Latin_Ext_D"),
    c(0xA767, None, "LATIN SMALL LETTER THORN WITH STROKE THROUGH DESCENDER", 0x31, "Latin_Ext_D"),
    c(0xA768, None, "LATIN CAPITAL LETTER VEND", 0x31, "Latin_Ext_D"),
    c(0xA769, None, "LATIN SMALL LETTER VEND", 0x31, "Latin_Ext_D"),
    c(0xA76A, None, "LATIN CAPITAL LETTER ET", 0x31, "Latin_Ext_D"),
    c(0xA76B, None, "LATIN SMALL LETTER ET", 0x31, "Latin_Ext_D"),
    c(0xA76C, None, "LATIN CAPITAL LETTER IS", 0x31, "Latin_Ext_D"),
    c(0xA76D, None, "LATIN SMALL LETTER IS", 0x31, "Latin_Ext_D"),
    c(0xA76E, None, "LATIN CAPITAL LETTER CON", 0x31, "Latin_Ext_D"),
    c(0xA76F, None, "LATIN SMALL LETTER CON", 0x31, "Latin_Ext_D"),
    c(0xA770, None, "MODIFIER LETTER US", 0x31, "Latin_Ext_D"),
    c(0xA771, None, "LATIN SMALL LETTER DUM", 0x31, "Latin_Ext_D"),
    c(0xA772, None, "LATIN SMALL LETTER LUM", 0x31, "Latin_Ext_D"),
    c(0xA773, None, "LATIN SMALL LETTER MUM", 0x31, "Latin_Ext_D"),
    c(0xA774, None, "LATIN SMALL LETTER NUM", 0x31, "Latin_Ext_D"),
    c(0xA775, None, "LATIN SMALL LETTER RUM", 0x31, "Latin_Ext_D"),
    c(0xA776, None, "LATIN LETTER SMALL CAPITAL RUM", 0x31, "Latin_Ext_D"),
    c(0xA777, None, "LATIN SMALL LETTER TUM", 0x31, "Latin_Ext_D"),
    c(0xA778, None, "LATIN SMALL LETTER UM", 0x31, "Latin_Ext_D"),
    c(0xA779, None, "LATIN CAPITAL LETTER INSULAR D", 0x31, "Latin_Ext_D"),
    c(0xA77A, None, "LATIN SMALL LETTER INSULAR D", 0x31, "Latin_Ext_D"),
    c(0xA77B, None, "LATIN CAPITAL LETTER INSULAR F", 0x31, "Latin_Ext_D"),
    c(0xA77C, None, "LATIN SMALL LETTER INSULAR F", 0x31, "Latin_Ext_D"),
    c(0xA77D, None, "LATIN CAPITAL LETTER INSULAR G", 0x31, "Latin_Ext_D"),
    c(0xA77E, None, "LATIN CAPITAL LETTER TURNED INSULAR G", 0x31, "Latin_Ext_D"),
    c(0xA77F, None, "LATIN SMALL LETTER TURNED INSULAR G", 0x31, "Latin_Ext_D"),
    c(0xA780, None, "LATIN CAPITAL LETTER TURNED L", 0x31, "Latin_Ext_D"),
    c(0xA781, None, "LATIN SMALL LETTER TURNED L", 0x31, "Latin_Ext_D"),
    c(0xA782, None, "LATIN CAPITAL LETTER INSULAR R", 0x31, "Latin_Ext_D"),
    c(0xA783, None, "LATIN SMALL LETTER INSULAR R", 0x31, "Latin_Ext_D"),
    c(0xA784, None, "LATIN CAPITAL LETTER INSULAR S", 0x31, "Latin_Ext_D"),
    c(0xA785, None, "LATIN SMALL LETTER INSULAR S", 0x31, "Latin_Ext_D"),
    c(0xA786, None, "LATIN CAPITAL LETTER INSULAR T", 0x31, "Latin_Ext_D"),
    c(0xA787, None, "LATIN SMALL LETTER INSULAR T", 0x31, "Latin_Ext_D"),
    c(0xA788, None, "MODIFIER LETTER LOW CIRCUMFLEX ACCENT", 0x31, "Latin_Ext_D"),
    c(0xA789, None, "MODIFIER LETTER COLON", 0x00, "Latin_Ext_D"),
    c(0xA78A, None, "MODIFIER LETTER SHORT EQUALS SIGN", 0x00, "Latin_Ext_D"),
    c(0xA78B, None, "LATIN CAPITAL LETTER SALTILLO", 0x31, "Latin_Ext_D"),
    c(0xA78C, None, "LATIN SMALL LETTER SALTILLO", 0x31, "Latin_Ext_D"),
    c(0xA78D, None, "LATIN CAPITAL LETTER TURNED H", 0x31, "Latin_Ext_D"),
    c(0xA78E, None, "LATIN SMALL LETTER L WITH RETROFLEX HOOK AND BELT", 0x31, "Latin_Ext_D"),
    c(0xA78F, None, "LATIN LETTER SINOLOGICAL DOT", 0x31, "Latin_Ext_D"),
    c(0xA790, None, "LATIN CAPITAL LETTER N WITH DESCENDER", 0x31, "Latin_Ext_D"),
    c(0xA791, None, "LATIN SMALL LETTER N WITH DESCENDER", 0x31, "Latin_Ext_D"),
    c(0xA792, None, "LATIN CAPITAL LETTER C WITH BAR", 0x31, "Latin_Ext_D"),
    c(0xA793, None, "LATIN SMALL LETTER C WITH BAR", 0x31, "Latin_Ext_D"),
    c(0xA794, None, "LATIN SMALL LETTER C WITH PALATAL HOOK", 0x31, "Latin_Ext_D"),
    c(0xA795, None, "LATIN SMALL LETTER H WITH PALATAL HOOK", 0x31, "Latin_Ext_D"),
    c(0xA796, None, "LATIN CAPITAL LETTER B WITH FLOURISH", 0x31, "Latin_Ext_D"),
    c(0xA797, None, "LATIN SMALL LETTER B WITH FLOURISH", 0x31, "Latin_Ext_D"),
    c(0xA798, None, "LATIN CAPITAL LETTER F WITH STROKE", 0x31, "Latin_Ext_D"),
    c(0xA799, None, "LATIN SMALL LETTER F WITH STROKE", 0x31, "Latin_Ext_D"),
    c(0xA79A, None, "LATIN CAPITAL LETTER VOLAPUK AE", 0x31, "Latin_Ext_D"),
    c(0xA79B, None, "LATIN SMALL LETTER VOLAPUK AE", 0x31, "Latin_Ext_D"),
    c(0xA79C, None, "LATIN CAPITAL LETTER VOLAPUK OE", 0x31, "Latin_Ext_D"),
    c(0xA79D, None, "LATIN SMALL LETTER VOLAPUK OE", 0x31, "Latin_Ext_D"),
    c(0xA79E, None, "LATIN CAPITAL LETTER VOLAPUK UE", 0x31, "Latin_Ext_D"),
    c(0xA79F, None, "LATIN SMALL LETTER VOLAPUK UE", 0x31, "Latin_Ext_D"),
    c(0xA7A0, None, "LATIN CAPITAL LETTER G WITH OBLIQUE STROKE", 0x31, "Latin_Ext_D"),
    c(0xA7A1, None, "LATIN SMALL LETTER G WITH OBLIQUE STROKE", 0x31, "Latin_Ext_D"),
    c(0xA7A2, None, "LATIN CAPITAL LETTER K WITH OBLIQUE STROKE", 0x31, "Latin_Ext_D"),
    c(0xA7A3, None, "LATIN SMALL LETTER K WITH OBLIQUE STROKE", 0x31, "Latin_Ext_D"),
    c(0xA7A4, None, "LATIN CAPITAL LETTER N WITH OBLIQUE STROKE", 0x31, "Latin_Ext_D"),
    c(0xA7A5, None, "LATIN SMALL LETTER N WITH OBLIQUE STROKE", 0x31, "Latin_Ext_D"),
    c(0xA7A6, None, "LATIN CAPITAL LETTER R WITH OBLIQUE STROKE", 0x31, "Latin_Ext_D"),
    c(0xA7A7, None, "LATIN SMALL LETTER R WITH OBLIQUE STROKE", 0x31, "Latin_Ext_D"),
    c(0xA7A8, None, "LATIN CAPITAL LETTER S WITH OBLIQUE STROKE", 0x31, "Latin_Ext_D"),
    c(0xA7A9, None, "LATIN SMALL LETTER S WITH OBLIQUE STROKE", 0x31, "Latin_Ext_D"),
    c(0xA7AA, None, "LATIN CAPITAL LETTER H WITH HOOK", 0x31, "Latin_Ext_D"),
    c(0xA7AB, None, "LATIN CAPITAL LETTER REVERSED OPEN E", 0x31, "Latin_Ext_D"),
    c(0xA7AC, None, "LATIN CAPITAL LETTER SCRIPT G", 0x31, "Latin_Ext_D"),
    c(0xA7AD, None, "LATIN CAPITAL LETTER L WITH BELT", 0x31, "Latin_Ext_D"),
    c(0xA7AE, None, "LATIN CAPITAL LETTER SMALL CAPITAL I", 0x31, "Latin_Ext_D"),
    c(0xA7AF, None, "LATIN LETTER SMALL CAPITAL Q", 0x31, "Latin_Ext_D"),
    c(0xA7B0, None, "LATIN CAPITAL LETTER TURNED K", 0x31, "Latin_Ext_D"),
    c(0xA7B1, None, "LATIN CAPITAL LETTER TURNED T", 0x31, "Latin_Ext_D"),
    c(0xA7B2, None, "LATIN CAPITAL LETTER J WITH CROSSED-TAIL", 0x31, "Latin_Ext_D"),
    c(0xA7B3, None, "LATIN CAPITAL LETTER CHI", 0x31, "Latin_Ext_D"),
    c(0xA7B4, None, "LATIN CAPITAL LETTER BETA", 0x31, "Latin_Ext_D"),
    c(0xA7B5, None, "LATIN SMALL LETTER BETA", 0x31, "Latin_Ext_D"),
    c(0xA7B6, None, "LATIN CAPITAL LETTER OMEGA", 0x31, "Latin_Ext_D"),
    c(0xA7B7, None, "LATIN SMALL LETTER OMEGA", 0x31, "Latin_Ext_D"),
    c(0xA7B8, None, "LATIN CAPITAL LETTER U WITH STROKE", 0x31, "Latin_Ext_D"),
    c(0xA7B9, None, "LATIN SMALL LETTER U WITH STROKE", 0x31, "Latin_Ext_D"),
    c(0xA7BA, None, "LATIN CAPITAL LETTER GLOTTAL A", 0x31, "Latin_Ext_D"),
    c(0xA7BB, None, "LATIN SMALL LETTER GLOTTAL A", 0x31, "Latin_Ext_D"),
    c(0xA7BC, None, "LATIN CAPITAL LETTER GLOTTAL I", 0x31, "Latin_Ext_D"),
    c(0xA7BD, None, "LATIN SMALL LETTER GLOTTAL I", 0x31, "Latin_Ext_D"),
    c(0xA7BE, None, "LATIN CAPITAL LETTER GLOTTAL U", 0x31, "Latin_Ext_D"),
    c(0xA7BF, None, "LATIN SMALL LETTER GLOTTAL U", 0x31, "Latin_Ext_D"),
    c(0xA7C0, None, "LATIN CAPITAL LETTER OLD POLISH O", 0x31, "Latin_Ext_D"),
    c(0xA7C1, None, "LATIN SMALL LETTER OLD POLISH O", 0x31, "Latin_Ext_D"),
    c(0xA7C2, None, "LATIN CAPITAL LETTER ANGLICANA W", 0x31, "Latin_Ext_D"),
    c(0xA7C3, None, "LATIN SMALL LETTER ANGLICANA W", 0x31, "Latin_Ext_D"),
    c(0xA7C4, None, "LATIN CAPITAL LETTER C WITH PALATAL HOOK", 0x31, "Latin_Ext_D"),
    c(0xA7C5, None, "LATIN CAPITAL LETTER S WITH HOOK", 0x31, "Latin_Ext_D"),
    c(0xA7C6, None, "LATIN CAPITAL LETTER Z WITH PALATAL HOOK", 0x31, "Latin_Ext_D"),
    c(0xA7C7, None, "LATIN CAPITAL LETTER D WITH SHORT STROKE OVERLAY", 0x31, "Latin_Ext_D"),
    c(0xA7C8, None, "LATIN SMALL LETTER D WITH SHORT STROKE OVERLAY", 0x31, "Latin_Ext_D"),
    c(0xA7C9, None, "LATIN CAPITAL LETTER S WITH SHORT STROKE OVERLAY", 0x31, "Latin_Ext_D"),
    c(0xA7CA, None, "LATIN SMALL LETTER S WITH SHORT STROKE OVERLAY", 0x31, "Latin_Ext_D"),
    c(0xA7D0, None, "LATIN CAPITAL LETTER CLOSED INSULAR G", 0x31, "Latin_Ext_D"),
    c(0xA7D1, None, "LATIN SMALL LETTER CLOSED INSULAR G", 0x31, "Latin_Ext_D"),
    c(0xA7D3, None, "LATIN SMALL LETTER DOUBLE THORN", 0x31, "Latin_Ext_D"),
    c(0xA7D5, None, "LATIN SMALL LETTER DOUBLE WYNN", 0x31, "Latin_Ext_D"),
    c(0xA7D6, None, "LATIN CAPITAL LETTER MIDDLE SCOTS S", 0x31, "Latin_Ext_D"),
    c(0xA7D7, None, "LATIN SMALL LETTER MIDDLE SCOTS S", 0x31, "Latin_Ext_D"),
    c(0xA7D8, None, "LATIN CAPITAL LETTER SIGMOID S", 0x31, "Latin_Ext_D"),
    c(0xA7D9, None, "LATIN SMALL LETTER SIGMOID S", 0x31, "Latin_Ext_D"),
    c(0xA7F2, None, "MODIFIER LETTER CAPITAL C", 0x31, "Latin_Ext_D"),
    c(0xA7F3, None, "MODIFIER LETTER CAPITAL F", 0x31, "Latin_Ext_D"),
    c(0xA7F4, None, "MODIFIER LETTER CAPITAL Q", 0x31, "Latin_Ext_D"),
    c(0xA7F5, None, "LATIN CAPITAL LETTER REVERSED HALF H", 0x31, "Latin_Ext_D"),
    c(0xA7F6, None, "LATIN SMALL LETTER REVERSED HALF H", 0x31, "Latin_Ext_D"),
    c(0xA7F7, None, "LATIN EPIGRAPHIC LETTER SIDEWAYS I", 0x31, "Latin_Ext_D"),
    c(0xA7F8, None, "MODIFIER LETTER CAPITAL H WITH STROKE", 0x31, "Latin_Ext_D"),
    c(0xA7F9, None, "MODIFIER LETTER SMALL LIGATURE OE", 0x31, "Latin_Ext_D"),
    c(0xA7FA, None, "LATIN LETTER SMALL CAPITAL TURNED M", 0x31, "Latin_Ext_D"),
    c(0xA7FB, None, "LATIN EPIGRAPHIC LETTER REVERSED F", 0x31, "Latin_Ext_D"),
    c(0xA7FC, None, "LATIN EPIGRAPHIC LETTER REVERSED P", 0x31, "Latin_Ext_D"),
    c(0xA7FD, None, "LATIN EPIGRAPHIC LETTER INVERTED M", 0x31, "Latin_Ext_D"),
    c(0xA7FE, None, "LATIN EPIGRAPHIC LETTER I LONGA", 0x31, "Latin_Ext_D"),
    c(0xA7FF, None, "LATIN EPIGRAPHIC LETTER ARCHAIC M", 0x31, "Latin_Ext_D"),
    c(0xA800, None, "SYLOTI NAGRI LETTER A", 0x31, "Syloti_Nagri"),
    c(0xA801, None, "SYLOTI NAGRI LETTER I", 0x31, "Syloti_Nagri"),
    c(0xA802, None, "SYLOTI NAGRI SIGN DVISVARA", 0x21, "Syloti_Nagri"),
    c(0xA803, None, "SYLOTI NAGRI LETTER U", 0x31, "Syloti_Nagri"),
    c(0xA804, None, "SYLOTI NAGRI LETTER E", 0x31, "Syloti_Nagri"),
    c(0xA805, None, "SYLOTI NAGRI LETTER O", 0x31, "Syloti_Nagri"),
    c(0xA806, None, "SYLOTI NAGRI SIGN HASANTA", 0x20, "Syloti_Nagri"),
    c(0xA807, None, "SYLOTI NAGRI LETTER KO", 0x31, "Syloti_Nagri"),
    c(0xA808, None, "SYLOTI NAGRI LETTER KHO", 0x31, "Syloti_Nagri"),
    c(0xA809, None, "SYLOTI NAGRI LETTER GO", 0x31, "Syloti_Nagri"),
    c(0xA80A, None, "SYLOTI NAGRI LETTER GHO", 0x31, "Syloti_Nagri"),
    c(0xA80B, None, "SYLOTI NAGRI SIGN ANUSVARA", 0x21, "Syloti_Nagri"),
    c(0xA80C, None, "SYLOTI NAGRI LETTER CO", 0x31, "Syloti_Nagri"),
    c(0xA80D, None, "SYLOTI NAGRI LETTER CHO", 0x31, "Syloti_Nagri"),
    c(0xA80E, None, "SYLOTI NAGRI LETTER JO", 0x31, "Syloti_Nagri"),
    c(0xA80F, None, "SYLOTI NAGRI LETTER JHO", 0x31, "Syloti_Nagri"),
    c(0xA810, None, "SYLOTI NAGRI LETTER TTO", 0x31, "Syloti_Nagri"),
    c(0xA811, None, "SYLOTI NAGRI LETTER TTHO", 0x31, "Syloti_Nagri"),
    c(0xA812, None, "SYLOTI NAGRI LETTER DDO", 0x31, "Syloti_Nagri"),
    c(0xA813, None, "SYLOTI NAGRI LETTER DDHO", 0x31, "Syloti_Nagri"),
    c(0xA814, None, "SYLOTI NAGRI LETTER TO", 0x31, "Syloti_Nagri"),
    c(0xA815, None, "SYLOTI NAGRI LETTER THO", 0x31, "Syloti_Nagri"),
    c(0xA816, None, "SYLOTI NAGRI LETTER DO", 0x31, "Syloti_Nagri"),
    c(0xA817, None, "SYLOTI NAGRI LETTER DHO", 0x31, "Syloti_Nagri"),
    c(0xA818, None, "SYLOTI NAGRI LETTER NO", 0x31, "Syloti_Nagri"),
    c(0xA819, None, "SYLOTI NAGRI LETTER PO", 0x31, "Syloti_Nagri"),
    c(0xA81A, None, "SYLOTI NAGRI LETTER PHO", 0x31, "Syloti_Nagri"),
    c(0xA81B, None, "SYLOTI NAGRI LETTER BO", 0x31, "Syloti_Nagri"),
    c(0xA81C, None, "SYLOTI NAGRI LETTER BHO", 0x31, "Syloti_Nagri"),
    c(0xA81D, None, "SYLOTI NAGRI LETTER MO", 0x31, "Syloti_Nagri"),
    c(0xA81E, None, "SYLOTI NAGRI LETTER RO", 0x31, "Syloti_Nagri"),
    c(0xA81F, None, "SYLOTI NAGRI LETTER LO", 0x31, "Syloti_Nagri"),
    c(0xA820, None, "SYLOTI NAGRI LETTER RRO", 0x31, "Syloti_Nagri"),
    c(0xA821, None, "SYLOTI NAGRI LETTER SO", 0x31, "Syloti_Nagri"),
    c(0xA822, None, "SYLOTI NAGRI LETTER HO", 0x31, "Syloti_Nagri"),
    c(0xA823, None, "SYLOTI NAGRI VOWEL SIGN A", 0x21, "Syloti_Nagri"),
    c(0xA824, None, "SYLOTI NAGRI VOWEL SIGN I", 0x21, "Syloti_Nagri"),
    c(0xA825, None, "SYLOTI NAGRI VOWEL SIGN U", 0x21, "Syloti_Nagri"),
    c(0xA826, None, "SYLOTI NAGRI VOWEL SIGN E", 0x21, "Syloti_Nagri"),
    c(0xA827, None, "SYLOTI NAGRI VOWEL SIGN OO", 0x21, "Syloti_Nagri"),
    c(0xA828, None, "SYLOTI NAGRI POETRY MARK-1", 0x00, "Syloti_Nagri"),
    c(0xA829, None, "SYLOTI NAGRI POETRY MARK-2", 0x00, "Syloti_Nagri"),
    c(0xA82A, None, "SYLOTI NAGRI POETRY MARK-3", 0x00, "Syloti_Nagri"),
    c(0xA82B, None, "SYLOTI NAGRI POETRY MARK-4", 0x00, "Syloti_Nagri"),
    c(0xA82C, None, "SYLOTI NAGRI SIGN ALTERNATE HASANTA", 0x20, "Syloti_Nagri"),
    c(0xA830, None, "NORTH INDIC FRACTION ONE QUARTER", 0x00, "Indic_Number_Forms"),
    c(0xA831, None, "NORTH INDIC FRACTION ONE HALF", 0x00, "Indic_Number_Forms"),
    c(0xA832, None, "NORTH INDIC FRACTION THREE QUARTERS", 0x00, "Indic_Number_Forms"),
    c(0xA833, None, "NORTH INDIC FRACTION ONE SIXTEENTH", 0x00, "Indic_Number_Forms"),
    c(0xA834, None, "NORTH INDIC FRACTION ONE EIGHTH", 0x00, "Indic_Number_Forms"),
    c(0xA835, None, "NORTH INDIC FRACTION THREE SIXTEENTHS", 0x00, "Indic_Number_Forms"),
    c(0xA836, None, "NORTH INDIC QUARTER MARK", 0x00, "Indic_Number_Forms"),
    c(0xA837, None, "NORTH INDIC PLACEHOLDER MARK", 0x00, "Indic_Number_Forms"),
    c(0xA838, None, "NORTH INDIC RUPEE MARK", 0x00, "Indic_Number_Forms"),
    c(0xA839, None, "NORTH INDIC QUANTITY MARK", 0x00, "Indic_Number_Forms"),
    c(0xA840, None, "PHAGS-PA LETTER KA", 0x31, "Phags_Pa"),
    c(0xA841, None, "PHAGS-PA LETTER KHA", 0x31, "Phags_Pa"),
    c(0xA842, None, "PHAGS-PA LETTER GA", 0x31, "Phags_Pa"),
    c(0xA843, None, "PHAGS-PA LETTER NGA", 0x31, "Phags_Pa"),
    c(0xA844, None, "PHAGS-PA LETTER CA", 0x31, "Phags_Pa"),
    c(0xA845, None, "PHAGS-PA LETTER CHA", 0x31, "Phags_Pa"),
    c(0xA846, None, "PHAGS-PA LETTER JA", 0x31, "Phags_Pa"),
    c(0xA847, None, "PHAGS-PA LETTER NYA", 0x31, "Phags_Pa"),
    c(0xA848, None, "PHAGS-PA LETTER TA", 0x31, "Phags_Pa"),
    c(0xA849, None, "PHAGS-PA LETTER THA", 0x31, "Phags_Pa"),
    c(0xA84A, None, "PHAGS-PA LETTER DA", 0x31, "Phags_Pa"),
    c(0xA84B, None, "PHAGS-PA LETTER NA", 0x31, "Phags_Pa"),
    c(0xA84C, None, "PHAGS-PA LETTER PA", 0x31, "Phags_Pa"),
    c(0xA84D, None, "PHAGS-PA LETTER PHA", 0x31, "Phags_Pa"),
    c(0xA84E, None, "PHAGS-PA LETTER BA", 0x31, "Phags_Pa"),
    c(0xA84F, None, "PHAGS-PA LETTER MA", 0x31, "Phags_Pa"),
    c(0xA850, None, "PHAGS-PA LETTER TSA", 0x31, "Phags_Pa"),
    c(0xA851, None, "PHAGS-PA LETTER TSHA", 0x31, "Phags_Pa"),
    c(0xA852, None, "PHAGS-PA LETTER DZA", 0x31, "Phags_Pa"),
    c(0xA853, None, "PHAGS-PA LETTER WA", 0x31, "Phags_Pa"),
    c(0xA854, None, "PHAGS-PA LETTER ZHA", 0x31, "Phags_Pa"),
    c(0xA855, None, "PHAGS-PA LETTER ZA", 0x31, "Phags_Pa"),
    c(0xA856, None, "PHAGS-PA LETTER SMALL A", 0x31, "Phags_Pa"),
    c(0xA857, None, "PHAGS-PA LETTER YA", 0x31, "Phags_Pa"),
    c(0xA858, None, "PHAGS-PA LETTER RA", 0x31, "Phags_Pa"),
    c(0xA859, None, "PHAGS-PA LETTER LA", 0x31, "Phags_Pa"),
    c(0xA85A, None, "PHAGS-PA LETTER SHA", 0x31, "Phags_Pa"),
    c(0xA85B, None, "PHAGS-PA LETTER SA", 0x31, "Phags_Pa"),
    c(0xA85C, None, "PHAGS-PA LETTER HA", 0x31, "Phags_Pa"),
    c(0xA85D, None, "PHAGS-PA LETTER A", 0x31, "Phags_Pa"),
    c(0xA85E, None, "PHAGS-PA LETTER I", 0x31, "Phags_Pa"),
    c(0xA85F, None, "PHAGS-PA LETTER U", 0x31, "Phags_Pa"),
    c(0xA860, None, "PHAGS-PA LETTER E", 0x31, "Phags_Pa"),
    c(0xA861, None, "PHAGS-PA LETTER O", 0x31, "Phags_Pa"),
    c(0xA862, None, "PHAGS-PA LETTER QA", 0x31, "Phags_Pa"),
    c(0xA863, None, "PHAGS-PA LETTER XA", 0x31, "Phags_Pa"),
    c(0xA864, None, "PHAGS-PA LETTER FA", 0x31, "Phags_Pa"),
    c(0xA865, None, "PHAGS-PA LETTER GGA", 0x31, "Phags_Pa"),
    c(0xA866, None, "PHAGS-PA LETTER EE", 0x31, "Phags_Pa"),
    c(0xA867, None, "PHAGS-PA SUBJOINED LETTER WA", 0x31, "Phags_Pa"),
    c(0xA868, None, "PHAGS-PA SUBJOINED LETTER YA", 0x31, "Phags_Pa"),
    c(0xA869, None, "PHAGS-PA LETTER TTA", 0x31, "Phags_Pa"),
    c(0xA86A, None, "PHAGS-PA LETTER TTHA", 0x31, "Phags_Pa"),
    c(0xA86B, None, "PHAGS-PA LETTER DDA", 0x31, "Phags_Pa"),
    c(0xA86C, None, "PHAGS-PA LETTER NNA", 0x31, "Phags_Pa"),
    c(0xA86D, None, "PHAGS-PA LETTER ALTERNATE YA", 0x31, "Phags_Pa"),
    c(0xA86E, None, "PHAGS-PA LETTER VOICELESS SHA", 0x31, "Phags_Pa"),
    c(0xA86F, None, "PHAGS-PA LETTER VOICED HA", 0x31, "Phags_Pa"),
    c(0xA870, None, "PHAGS-PA LETTER ASPIRATED FA", 0x31, "Phags_Pa"),
    c(0xA871, None, "PHAGS-PA SUBJOINED LETTER RA", 0x31, "Phags_Pa"),
    c(0xA872, None, "PHAGS-PA SUPERFIXED LETTER RA", 0x31, "Phags_Pa"),
    c(0xA873, None, "PHAGS-PA LETTER CANDRABINDU", 0x31, "Phags_Pa"),
    c(0xA874, None, "PHAGS-PA SINGLE HEAD MARK", 0x00, "Phags_Pa"),
    c(0xA875, None, "PHAGS-PA DOUBLE HEAD MARK", 0x00, "Phags_Pa"),
    c(0xA876, None, "PHAGS-PA MARK SHAD", 0x00, "Phags_Pa"),
    c(0xA877, None, "PHAGS-PA MARK DOUBLE SHAD", 0x00, "Phags_Pa"),
    c(0xA880, None, "SAURASHTRA SIGN ANUSVARA", 0x21, "Saurashtra"),
    c(0xA881, None, "SAURASHTRA SIGN VISARGA", 0x21, "Saurashtra"),
    c(0xA882, None, "SAURASHTRA LETTER A", 0x31, "Saurashtra"),
    c(0xA883, None, "SAURASHTRA LETTER AA", 0x31, "Saurashtra"),
    c(0xA884, None, "SAURASHTRA LETTER I", 0x31, "Saurashtra"),
    c(0xA885, None, "SAURASHTRA LETTER II", 0x31, "Saurashtra"),
    c(0xA886, None, "SAURASHTRA LETTER U", 0x31, "Saurashtra"),
    c(0xA887, None, "SAURASHTRA LETTER UU", 0x31, "Saurashtra"),
    c(0xA888, None, "SAURASHTRA LETTER VOCALIC R", 0x31, "Saurashtra"),
    c(0xA889, None, "SAURASHTRA LETTER VOCALIC RR", 0x31, "Saurashtra"),
    c(0xA88A, None, "SAURASHTRA LETTER VOCALIC L", 0x31, "Saurashtra"),
    c(0xA88B, None, "SAURASHTRA LETTER VOCALIC LL", 0x31, "Saurashtra"),
    c(0xA88C, None, "SAURASHTRA LETTER E", 0x31, "Saurashtra"),
    c(0xA88D, None, "SAURASHTRA LETTER EE", 0x31, "Saurashtra"),
    c(0xA88E, None, "SAURASHTRA LETTER AI", 0x31, "Saurashtra"),
    c(0xA88F, None, "SAURASHTRA LETTER O", 0x31, "Saurashtra"),
    c(0xA890, None, "SAURASHTRA LETTER OO", 0x31, "Saurashtra"),
    c(0xA891, None, "SAURASHTRA LETTER AU", 0x31, "Saurashtra"),
    c(0xA892, None, "SAURASHTRA LETTER KA", 0x31, "Saurashtra"),
    c(0xA893, None, "SAURASHTRA LETTER KHA", 0x31, "Saurashtra"),
    c(0xA894, None, "SAURASHTRA LETTER GA", 0x31, "Saurashtra"),
    c(0xA895, None, "SAURASHTRA LETTER GHA", 0x31, "Saurashtra"),
    c(0xA896, None, "SAURASHTRA LETTER NGA", 0x31, "Saurashtra"),
    c(0xA897, None, "SAURASHTRA LETTER CA", 0x31, "Saurashtra"),
    c(0xA898, None, "SAURASHTRA LETTER CHA", 0x31, "Saurashtra"),
    c(0xA899, None, "SAURASHTRA LETTER JA", 0x31, "Saurashtra"),
    c(0xA89A, None, "SAURASHTRA LETTER JHA", 0x31, "Saurashtra"),
    c(0xA89B, None, "SAURASHTRA LETTER NYA", 0x31, "Saurashtra"),
    c(0xA89C, None, "SAURASHTRA LETTER TTA", 0x31, "Saurashtra"),
    c(0xA89D, None, "SAURASHTRA LETTER TTHA", 0x31, "Saurashtra"),
    c(0xA89E, None, "SAURASHTRA LETTER DDA", 0x31, "Saurashtra"),
    c(0xA89F, None, "SAURASHTRA LETTER DDHA", 0x31, "Saurashtra"),
    c(0xA8A0, None, "SAURASHTRA LETTER NNA", 0x31, "Saurashtra"),
    c(0xA8A1, None, "SAURASHTRA LETTER TA", 0x31, "Saurashtra"),
    c(0xA8A2, None, "SAURASHTRA LETTER THA", 0x31, "Saurashtra"),
    c(0xA8A3, None, "SAURASHTRA LETTER DA", 0x31, "Saurashtra"),
    c(0xA8A4, None, "SAURASHTRA LETTER DHA", 0x31, "Saurashtra"),
    c(0xA8A5, None, "SAURASHTRA LETTER NA", 0x31, "Saurashtra"),
    c(0xA8A6, None, "SAURASHTRA LETTER PA", 0x31, "Saurashtra"),
    c(0xA8A7, None, "SAURASHTRA LETTER PHA", 0x31, "Saurashtra"),
    c(0xA8A8, None, "SAURASHTRA LETTER BA", 0x31, "Saurashtra"),
    c(0xA8A9, None, "SAURASHTRA LETTER BHA", 0x31, "Saurashtra"),
    c(0xA8AA, None, "SAURASHTRA LETTER MA", 0x31, "Saurashtra"),
    c(0xA8AB, None, "SAURASHTRA LETTER YA", 0x31, "Saurashtra"),
    c(0xA8AC, None, "SAURASHTRA LETTER RA", 0x31, "Saurashtra"),
    c(0xA8AD, None, "SAURASHTRA LETTER LA", 0x31, "Saurashtra"),
    c(0xA8AE, None, "SAURASHTRA LETTER VA", 0x31, "Saurashtra"),
    c(0xA8AF, None, "SAURASHTRA LETTER SHA", 0x31, "Saurashtra"),
    c(0xA8B0, None, "SAURASHTRA LETTER SSA", 0x31, "Saurashtra"),
    c(0xA8B1, None, "SAURASHTRA LETTER SA", 0x31, "Saurashtra"),
    c(0xA8B2, None, "SAURASHTRA LETTER HA", 0x31, "Saurashtra"),
    c(0xA8B3, None, "SAURASHTRA LETTER LLA", 0x31, "Saurashtra"),
    c(0xA8B4, None, "SAURASHTRA CONSONANT SIGN HAARU", 0x21, "Saurashtra"),
    c(0xA8B5, None, "SAURASHTRA VOWEL SIGN AA", 0x21, "Saurashtra"),
    c(0xA8B6, None, "SAURASHTRA VOWEL SIGN I", 0x21, "Saurashtra"),
    c(0xA8B7, None, "SAURASHTRA VOWEL SIGN II", 0x21, "Saurashtra"),
    c(0xA8B8, None, "SAURASHTRA VOWEL SIGN U", 0x21, "Saurashtra"),
    c(0xA8B9, None, "SAURASHTRA VOWEL SIGN UU", 0x21, "Saurashtra"),
    c(0xA8BA, None, "SAURASHTRA VOWEL SIGN VOCALIC R", 0x21, "Saurashtra"),
    c(0xA8BB, None, "SAURASHTRA VOWEL SIGN VOCALIC RR", 0x21, "Saurashtra"),
    c(0xA8BC, None, "SAURASHTRA VOWEL SIGN VOCALIC L", 0x21, "Saurashtra"),
    c(0xA8BD, None, "SAURASHTRA VOWEL SIGN VOCALIC LL", 0x21, "Saurashtra"),
    c(0xA8BE, None, "SAURASHTRA VOWEL SIGN E", 0x21, "Saurashtra"),
    c(0xA8BF, None, "SAURASHTRA VOWEL SIGN EE", 0x21, "Saurashtra"),
    c(0xA8C0, None, "SAURASHTRA VOWEL SIGN AI", 0x21, "Saurashtra"),
    c(0xA8C1, None, "SAURASHTRA VOWEL SIGN O", 0x21, "Saurashtra"),
    c(0xA8C2, None, "SAURASHTRA VOWEL SIGN OO", 0x21, "Saurashtra"),
    c(0xA8C3, None, "SAURASHTRA VOWEL SIGN AU", 0x21, "Saurashtra"),
    c(0xA8C4, None, "SAURASHTRA SIGN VIRAMA", 0x20, "Saurashtra"),
    c(0xA8C5, None, "SAURASHTRA SIGN CANDRABINDU", 0x21, "Saurashtra"),
    c(0xA8CE, None, "SAURASHTRA DANDA", 0x00, "Saurashtra"),
    c(0xA8CF, None, "SAURASHTRA DOUBLE DANDA", 0x00, "Saurashtra"),
    c(0xA8D0, None, "SAURASHTRA DIGIT ZERO", 0x20, "Saurashtra"),
    c(0xA8D1, None, "SAURASHTRA DIGIT ONE", 0x20, "Saurashtra"),
    c(0xA8D2, None, "SAURASHTRA DIGIT TWO", 0x20, "Saurashtra"),
    c(0xA8D3, None, "SAURASHTRA DIGIT THREE", 0x20, "Saurashtra"),
    c(0xA8D4, None, "SAURASHTRA DIGIT FOUR", 0x20, "Saurashtra"),
    c(0xA8D5, None, "SAURASHTRA DIGIT FIVE", 0x20, "Saurashtra"),
    c(0xA8D6, None, "SAURASHTRA DIGIT SIX", 0x20, "Saurashtra"),
    c(0xA8D7, None, "SAURASHTRA DIGIT SEVEN", 0x20, "Saurashtra"),
    c(0xA8D8, None, "SAURASHTRA DIGIT EIGHT", 0x20, "Saurashtra"),
    c(0xA8D9, None, "SAURASHTRA DIGIT NINE", 0x20, "Saurashtra"),
    c(0xA8E0, None, "COMBINING DEVANAGARI DIGIT ZERO", 0x20, "Devanagari_Ext"),
    c(0xA8E1, None, "COMBINING DEVANAGARI DIGIT ONE", 0x20, "Devanagari_Ext"),
    c(0xA8E2, None, "COMBINING DEVANAGARI DIGIT TWO", 0x20, "Devanagari_Ext"),
    c(0xA8E3, None, "COMBINING DEVANAGARI DIGIT THREE", 0x20, "Devanagari_Ext"),
    c(0xA8E4, None, "COMBINING DEVANAGARI DIGIT FOUR", 0x20, "Devanagari_Ext"),
    c(0xA8E5, None, "COMBINING DEVANAGARI DIGIT FIVE", 0x20, "Devanagari_Ext"),
    c(0xA8E6, None, "COMBINING DEVANAGARI DIGIT SIX", 0x20, "Devanagari_Ext"),
    c(0xA8E7, None, "COMBINING DEVANAGARI DIGIT SEVEN", 0x20, "Devanagari_Ext"),
    c(0xA8E8, None, "COMBINING DEVANAGARI DIGIT EIGHT", 0x20, "Devanagari_Ext"),
    c(0xA8E9, None, "COMBINING DEVANAGARI DIGIT NINE", 0x20, "Devanagari_Ext"),
    c(0xA8EA, None, "COMBINING DEVANAGARI LETTER A", 0x20, "Devanagari_Ext"),
    c(0xA8EB, None, "COMBINING DEVANAGARI LETTER U", 0x20, "Devanagari_Ext"),
    c(0xA8EC, None, "COMBINING DEVANAGARI LETTER KA", 0x20, "Devanagari_Ext"),
    c(0xA8ED, None, "COMBINING DEVANAGARI LETTER NA", 0x20, "Devanagari_Ext"),
    c(0xA8EE, None, "COMBINING DEVANAGARI LETTER PA", 0x20, "Devanagari_Ext"),
    c(0xA8EF, None, "COMBINING DEVANAGARI LETTER RA", 0x20, "Devanagari_Ext"),
    c(0xA8F0, None, "COMBINING DEVANAGARI LETTER VI", 0x20, "Devanagari_Ext"),
    c(0xA8F1, None, "COMBINING DEVANAGARI SIGN AVAGRAHA", 0x20, "Devanagari_Ext"),
    c(0xA8F2, None, "DEVANAGARI SIGN SPACING CANDRABINDU", 0x31, "Devanagari_Ext"),
    c(0xA8F3, None, "DEVANAGARI SIGN CANDRABINDU VIRAMA", 0x31, "Devanagari_Ext"),
    c(0xA8F4, None, "DEVANAGARI SIGN DOUBLE CANDRABINDU VIRAMA", 0x31, "Devanagari_Ext"),
    c(0xA8F5, None, "DEVANAGARI SIGN CANDRABINDU TWO", 0x31, "Devanagari_Ext"),
    c(0xA8F6, None, "DEVANAGARI SIGN CANDRABINDU THREE", 0x31, "Devanagari_Ext"),
    c(0xA8F7, None, "DEVANAGARI SIGN CANDRABINDU AVAGRAHA", 0x31, "Devanagari_Ext"),
    c(0xA8F8, None, "DEVANAGARI SIGN PUSHPIKA", 0x00, "Devanagari_Ext"),
    c(0xA8F9, None, "DEVANAGARI GAP FILLER", 0x00, "Devanagari_Ext"),
    c(0xA8FA, None, "DEVANAGARI CARET", 0x00, "Devanagari_Ext"),
    c(0xA8FB, None, "DEVANAGARI HEADSTROKE", 0x31, "Devanagari_Ext"),
    c(0xA8FC, None, "DEVANAGARI SIGN SIDDHAM", 0x00, "Devanagari_Ext"),
    c(0xA8FD, None, "DEVANAGARI JAIN OM", 0x31, "Devanagari_Ext"),
    c(0xA8FE, None, "DEVANAGARI LETTER AY", 0x31, "Devanagari_Ext"),
    c(0xA8FF, None, "DEVANAGARI VOWEL SIGN AY", 0x21, "Devanagari_Ext"),
    c(0xA900, None, "KAYAH LI DIGIT ZERO", 0x20, "Kayah_Li"),
    c(0xA901, None, "KAYAH LI DIGIT ONE", 0x20, "Kayah_Li"),
    c(0xA902, None, "KAYAH LI DIGIT TWO", 0x20, "Kayah_Li"),
    c(0xA903, None, "KAYAH LI DIGIT THREE", 0x20, "Kayah_Li"),
    c(0xA904, None, "KAYAH LI DIGIT FOUR", 0x20, "Kayah_Li"),
    c(0xA905, None, "KAYAH LI DIGIT FIVE", 0x20, "Kayah_Li"),
    c(0xA906, None, "KAYAH LI DIGIT SIX", 0x20, "Kayah_Li"),
    c(0xA907, None, "KAYAH LI DIGIT SEVEN", 0x20, "Kayah_Li"),
    c(0xA908, None, "KAYAH LI DIGIT EIGHT", 0x20, "Kayah_Li"),
    c(0xA909, None, "KAYAH LI DIGIT NINE", 0x20, "Kayah_Li"),
    c(0xA90A, None, "KAYAH LI LETTER KA", 0x31, "Kayah_Li"),
    c(0xA90B, None, "KAYAH LI LETTER KHA", 0x31, "Kayah_Li"),
    c(0xA90C, None, "KAYAH LI LETTER GA", 0x31, "Kayah_Li"),
    c(0xA90D, None, "KAYAH LI LETTER NGA", 0x31, "Kayah_Li"),
    c(0xA90E, None, "KAYAH LI LETTER SA", 0x31, "Kayah_Li"),
    c(0xA90F, None, "KAYAH LI LETTER SHA", 0x31, "Kayah_Li"),
    c(0xA910, None, "KAYAH LI LETTER ZA", 0x31, "Kayah_Li"),
    c(0xA911, None, "KAYAH LI LETTER NYA", 0x31, "Kayah_Li"),
    c(0xA912, None, "KAYAH LI LETTER TA", 0x31, "Kayah_Li"),
    c(0xA913, None, "KAYAH LI LETTER HTA", 0x31, "Kayah_Li"),
    c(0xA914, None, "KAYAH LI LETTER NA", 0x31, "Kayah_Li"),
    c(0xA915, None, "KAYAH LI LETTER PA", 0x31, "Kayah_Li"),
    c(0xA916, None, "KAYAH LI LETTER PHA", 0x31, "Kayah_Li"),
    c(0xA917, None, "KAYAH LI LETTER MA", 0x31, "Kayah_Li"),
    c(0xA918, None, "KAYAH LI LETTER DA", 0x31, "Kayah_Li"),
    c(0xA919, None, "KAYAH LI LETTER BA", 0x31, "Kayah_Li"),
    c(0xA91A, None, "KAYAH LI LETTER RA", 0x31, "Kayah_Li"),
    c(0xA91B, None, "KAYAH LI LETTER YA", 0x31, "Kayah_Li"),
    c(0xA91C, None, "KAYAH LI LETTER LA", 0x31, "Kayah_Li"),
    c(0xA91D, None, "KAYAH LI LETTER WA", 0x31, "Kayah_Li"),
    c(0xA91E, None, "KAYAH LI LETTER THA", 0x31, "Kayah_Li"),
    c(0xA91F, None, "KAYAH LI LETTER HA", 0x31, "Kayah_Li"),
    c(0xA920, None, "KAYAH LI LETTER VA", 0x31, "Kayah_Li"),
    c(0xA921, None, "KAYAH LI LETTER CA", 0x31, "Kayah_Li"),
    c(0xA922, None, "KAYAH LI LETTER A", 0x31, "Kayah_Li"),
    c(0xA923, None, "KAYAH LI LETTER OE", 0x31, "Kayah_Li"),
    c(0xA924, None, "KAYAH LI LETTER I", 0x31, "Kayah_Li"),
    c(0xA925, None, "KAYAH LI LETTER OO", 0x31, "Kayah_Li"),
    c(0xA926, None, "KAYAH LI VOWEL UE", 0x21, "Kayah_Li"),
    c(0xA927, None, "KAYAH LI VOWEL E", 0x21, "Kayah_Li"),
    c(0xA928, None, "KAYAH LI VOWEL U", 0x21, "Kayah_Li"),
    c(0xA929, None, "KAYAH LI VOWEL EE", 0x21, "Kayah_Li"),
    c(0xA92A, None, "KAYAH LI VOWEL O", 0x21, "Kayah_Li"),
    c(0xA92B, None, "KAYAH LI TONE PLOPHU", 0x20, "Kayah_Li"),
    c(0xA92C, None, "KAYAH LI TONE CALYA", 0x20, "Kayah_Li"),
    c(0xA92D, None, "KAYAH LI TONE CALYA PLOPHU", 0x20, "Kayah_Li"),
    c(0xA92E, None, "KAYAH LI SIGN CWI", 0x00, "Kayah_Li"),
    c(0xA92F, None, "KAYAH LI SIGN SHYA", 0x00, "Kayah_Li"),
    c(0xA930, None, "REJANG LETTER KA", 0x31, "Rejang"),
    c(0xA931, None, "REJANG LETTER GA", 0x31, "Rejang"),
    c(0xA932, None, "REJANG LETTER NGA", 0x31, "Rejang"),
    c(0xA933, None, "REJANG LETTER TA", 0x31, "Rejang"),
    c(0xA934, None, "REJANG LETTER DA", 0x31, "Rejang"),
    c(0xA935, None, "REJANG LETTER NA", 0x31, "Rejang"),
    c(0xA936, None, "REJANG LETTER PA", 0x31, "Rejang"),
    c(0xA937, None, "REJANG LETTER BA", 0x31, "Rejang"),
    c(0xA938, None, "REJANG LETTER MA", 0x31, "Rejang"),
    c(0xA939, None, "REJANG LETTER CA", 0x31, "Rejang"),
    c(0xA93A, None, "REJANG LETTER JA", 0x31, "Rejang"),
    c(0xA93B, None, "REJANG LETTER NYA", 0x31, "Rejang"),
    c(0xA93C, None, "REJANG LETTER SA", 0x31, "Rejang"),
    c(0xA93D, None, "REJANG LETTER RA", 0x31, "Rejang"),
    c(0xA93E, None, "REJANG LETTER LA", 0x31, "Rejang"),
    c(0xA93F, None, "REJANG LETTER YA", 0x31, "Rejang"),
    c(0xA940, None, "REJANG LETTER WA", 0x31, "Rejang"),
    c(0xA941, None, "REJANG LETTER HA", 0x31, "Rejang"),
    c(0xA942, None, "REJANG LETTER MBA", 0x31, "Rejang"),
    c(0xA943, None, "REJANG LETTER NGGA", 0x31, "Rejang"),
    c(0xA944, None, "REJANG LETTER NDA", 0x31, "Rejang"),
    c(0xA945, None, "REJANG LETTER NYJA", 0x31, "Rejang"),
    c(0xA946, None, "REJANG LETTER A", 0x31, "Rejang"),
    c(0xA947, None, "REJANG VOWEL SIGN I", 0x21, "Rejang"),
    c(0xA948, None, "REJANG VOWEL SIGN U", 0x21, "Rejang"),
    c(0xA949, None, "REJANG VOWEL SIGN E", 0x21, "Rejang"),
    c(0xA94A, None, "REJANG VOWEL SIGN AI", 0x21, "Rejang"),
    c(0xA94B, None, "REJANG VOWEL SIGN O", 0x21, "Rejang"),
    c(0xA94C, None, "REJANG VOWEL SIGN AU", 0x21, "Rejang"),
    c(0xA94D, None, "REJANG VOWEL SIGN EU", 0x21, "Rejang"),
    c(0xA94E, None, "REJANG VOWEL SIGN EA", 0x21, "Rejang"),
    c(0xA94F, None, "REJANG CONSONANT SIGN NG", 0x21, "Rejang"),
    c(0xA950, None, "REJANG CONSONANT SIGN N", 0x21, "Rejang"),
    c(0xA951, None, "REJANG CONSONANT SIGN R", 0x21, "Rejang"),
    c(0xA952, None, "REJANG CONSONANT SIGN H", 0x21, "Rejang"),
    c(0xA953, None, "REJANG VIRAMA", 0x20, "Rejang"),
    c(0xA95F, None, "REJANG SECTION MARK", 0x00, "Rejang"),
    c(0xA960, None, "HANGUL CHOSEONG TIKEUT-MIEUM", 0x31, "Jamo_Ext_A"),
    c(0xA961, None, "HANGUL CHOSEONG TIKEUT-PIEUP", 0x31, "Jamo_Ext_A"),
    c(0xA962, None, "HANGUL CHOSEONG TIKEUT-SIOS", 0x31, "Jamo_Ext_A"),
    c(0xA963, None, "HANGUL CHOSEONG TIKEUT-CIEUC", 0x31, "Jamo_Ext_A"),
    c(0xA964, None, "HANGUL CHOSEONG RIEUL-KIYEOK", 0x31, "Jamo_Ext_A"),
    c(0xA965, None, "HANGUL CHOSEONG RIEUL-SSANGKIYEOK", 0x31, "Jamo_Ext_A"),
    c(0xA966, None, "HANGUL CHOSEONG RIEUL-TIKEUT", 0x31, "Jamo_Ext_A"),
    c(0xA967, None, "HANGUL CHOSEONG RIEUL-SSANGTIKEUT", 0x31, "Jamo_Ext_A"),
    c(0xA968, None, "HANGUL CHOSEONG RIEUL-MIEUM", 0x31, "Jamo_Ext_A"),
    c(0xA969, None, "HANGUL CHOSEONG RIEUL-PIEUP", 0x31, "Jamo_Ext_A"),
    c(0xA96A, None, "HANGUL CHOSEONG RIEUL-SSANGPIEUP", 0x31, "Jamo_Ext_A"),
    c(0xA96B, None, "HANGUL CHOSEONG RIEUL-KAPYEOUNPIEUP", 0x31, "Jamo_Ext_A"),
    c(0xA96C, None, "HANGUL CHOSEONG RIEUL-SIOS", 0x31, "Jamo_Ext_A"),
    c(0xA96D, None, "HANGUL CHOSEONG RIEUL-CIEUC", 0x31, "Jamo_Ext_A"),
    c(0xA96E, None, "HANGUL CHOSEONG RIEUL-KHIEUKH", 0x31, "Jamo_Ext_A"),
    c(0xA96F, None, "HANGUL CHOSEONG MIEUM-KIYEOK", 0x31, "Jamo_Ext_A"),
    c(0xA970, None, "HANGUL CHOSEONG MIEUM-TIKEUT", 0x31, "Jamo_Ext_A"),
    c(0xA971, None, "HANGUL CHOSEONG MIEUM-SIOS", 0x31, "Jamo_Ext_A"),
    c(0xA972, None, "HANGUL CHOSEONG PIEUP-SIOS-THIEUTH", 0x31, "Jamo_Ext_A"),
    c(0xA973, None, "HANGUL CHOSEONG PIEUP-KHIEUKH", 0x31, "Jamo_Ext_A"),
    c(0xA974, None, "HANGUL CHOSEONG PIEUP-HIEUH", 0x31, "Jamo_Ext_A"),
    c(0xA975, None, "HANGUL CHOSEONG SSANGSIOS-PIEUP", 0x31, "Jamo_Ext_A"),
    c(0xA976, None, "HANGUL CHOSEONG IEUNG-RIEUL", 0x31, "Jamo_Ext_A"),
    c(0xA977, None, "HANGUL CHOSEONG IEUNG-HIEUH", 0x31, "Jamo_Ext_A"),
    c(0xA978, None, "HANGUL CHOSEONG SSANGCIEUC-HIEUH", 0x31, "Jamo_Ext_A"),
    c(0xA979, None, "HANGUL CHOSEONG SSANGTHIEUTH", 0x31, "Jamo_Ext_A"),
    c(0xA97A, None, "HANGUL CHOSEONG PHIEUPH-HIEUH", 0x31, "Jamo_Ext_A"),
    c(0xA97B, None, "HANGUL CHOSEONG HIEUH-SIOS", 0x31, "Jamo_Ext_A"),
    c(0xA97C, None, "HANGUL CHOSEONG SSANGYEORINHIEUH", 0x31, "Jamo_Ext_A"),
    c(0xA980, None, "JAVANESE SIGN PANYANGGA", 0x21, "Javanese"),
    c(0xA981, None, "JAVANESE SIGN CECAK", 0x21, "Javanese"),
    c(0xA982, None, "JAVANESE SIGN LAYAR", 0x21, "Javanese"),
    c(0xA983, None, "JAVANESE SIGN WIGNYAN", 0x21, "Javanese"),
    c(0xA984, None, "JAVANESE LETTER A", 0x31, "Javanese"),
    c(0xA985, None, "JAVANESE LETTER I KAWI", 0x31, "Javanese"),
    c(0xA986, None, "JAVANESE LETTER I", 0x31, "Javanese"),
    c(0xA987, None, "JAVANESE LETTER II", 0x31, "Javanese"),
    c(0xA988, None, "JAVANESE LETTER U", 0x31, "Javanese"),
    c(0xA989, None, "JAVANESE LETTER PA CEREK", 0x31, "Javanese"),
    c(0xA98A, None, "JAVANESE LETTER NGA LELET", 0x31, "Javanese"),
    c(0xA98B, None, "JAVANESE LETTER NGA LELET RASWADI", 0x31, "Javanese"),
    c(0xA98C, None, "JAVANESE LETTER E", 0x31, "Javanese"),
    c(0xA98D, None, "JAVANESE LETTER AI", 0x31, "Javanese"),
    c(0xA98E, None, "JAVANESE LETTER O", 0x31, "Javanese"),
    c(0xA98F, None, "JAVANESE LETTER KA", 0x31, "Javanese"),
    c(0xA990, None, "JAVANESE LETTER KA SASAK", 0x31, "Javanese"),
    c(0xA991, None, "JAVANESE LETTER KA MURDA", 0x31, "Javanese"),
    c(0xA992, None, "JAVANESE LETTER GA", 0x31, "Javanese"),
    c(0xA993, None, "JAVANESE LETTER GA MURDA", 0x31, "Javanese"),
    c(0xA994, None, "JAVANESE LETTER NGA", 0x31, "Javanese"),
    c(0xA995, None, "JAVANESE LETTER CA", 0x31, "Javanese"),
    c(0xA996, None, "JAVANESE LETTER CA MURDA", 0x31, "Javanese"),
    c(0xA997, None, "JAVANESE LETTER JA", 0x31, "Javanese"),
    c(0xA998, None, "JAVANESE LETTER NYA MURDA", 0x31, "Javanese"),
    c(0xA999, None, "JAVANESE LETTER JA MAHAPRANA", 0x31, "Javanese"),
    c(0xA99A, None, "JAVANESE LETTER NYA", 0x31, "Javanese"),
    c(0xA99B, None, "JAVANESE LETTER TTA", 0x31, "Javanese"),
    c(0xA99C, None, "JAVANESE LETTER TTA MAHAPRANA", 0x31, "Javanese"),
    c(0xA99D, None, "JAVANESE LETTER DDA", 0x31, "Javanese"),
    c(0xA99E, None, "JAVANESE LETTER DDA MAHAPRANA", 0x31, "Javanese"),
    c(0xA99F, None, "JAVANESE LETTER NA MURDA", 0x31, "Javanese"),
    c(0xA9A0, None, "JAVANESE LETTER TA", 0x31, "Javanese"),
    c(0xA9A1, None, "JAVANESE LETTER TA MURDA", 0x31, "Javanese"),
    c(0xA9A2, None, "JAVANESE LETTER DA", 0x31, "Javanese"),
    c(0xA9A3, None, "JAVANESE LETTER DA MAHAPRANA", 0x31, "Javanese"),
    c(0xA9A4, None, "JAVANESE LETTER NA", 0x31, "Javanese"),
    c(0xA9A5, None, "JAVANESE LETTER PA", 0x31, "Javanese"),
    c(0xA9A6, None, "JAVANESE LETTER PA MURDA", 0x31, "Javanese"),
    c(0xA9A7, None, "JAVANESE LETTER BA", 0x31, "Javanese"),
    c(0xA9A8, None, "JAVANESE LETTER BA MURDA", 0x31, "Javanese"),
    c(0xA9A9, None, "JAVANESE LETTER MA", 0x31, "Javanese"),
    c(0xA9AA, None, "JAVANESE LETTER YA", 0x31, "Javanese"),
    c(0xA9AB, None, "JAVANESE LETTER RA", 0x31, "Javanese"),
    c(0xA9AC, None, "JAVANESE LETTER RA AGUNG", 0x31, "Javanese"),
    c(0xA9AD, None, "JAVANESE LETTER LA", 0x31, "Javanese"),
    c(0xA9AE, None, "JAVANESE LETTER WA", 0x31, "Javanese"),
    c(0xA9AF, None, "JAVANESE LETTER SA MURDA", 0x31, "Javanese"),
    c(0xA9B0, None, "JAVANESE LETTER SA MAHAPRANA", 0x31, "Javanese"),
    c(0xA9B1, None, "JAVANESE LETTER SA", 0x31, "Javanese"),
    c(0xA9B2, None, "JAVANESE LETTER HA", 0x31, "Javanese"),
    c(0xA9B3, None, "JAVANESE SIGN CECAK TELU", 0x20, "Javanese"),
    c(0xA9B4, None, "JAVANESE VOWEL SIGN TARUNG", 0x21, "Javanese"),
    c(0xA9B5, None, "JAVANESE VOWEL SIGN TOLONG", 0x21, "Javanese"),
    c(0xA9B6, None, "JAVANESE VOWEL SIGN WULU", 0x21, "Javanese"),
    c(0xA9B7, None, "JAVANESE VOWEL SIGN WULU MELIK", 0x21, "Javanese"),
    c(0xA9B8, None, "JAVANESE VOWEL SIGN SUKU", 0x21, "Javanese"),
    c(0xA9B9, None, "JAVANESE VOWEL SIGN SUKU MENDUT", 0x21, "Javanese"),
    c(0xA9BA, None, "JAVANESE VOWEL SIGN TALING", 0x21, "Javanese"),
    c(0xA9BB, None, "JAVANESE VOWEL SIGN DIRGA MURE", 0x21, "Javanese"),
    c(0xA9BC, None, "JAVANESE VOWEL SIGN PEPET", 0x21, "Javanese"),
    c(0xA9BD, None, "JAVANESE CONSONANT SIGN KERET", 0x21, "Javanese"),
    c(0xA9BE, None, "JAVANESE CONSONANT SIGN PENGKAL", 0x21, "Javanese"),
    c(0xA9BF, None, "JAVANESE CONSONANT SIGN CAKRA", 0x21, "Javanese"),
    c(0xA9C0, None, "JAVANESE PANGKON", 0x20, "Javanese"),
    c(0xA9C1, None, "JAVANESE LEFT RERENGGAN", 0x00, "Javanese"),
    c(0xA9C2, None, "JAVANESE RIGHT RERENGGAN", 0x00, "Javanese"),
    c(0xA9C3, None, "JAVANESE PADA ANDAP", 0x00, "Javanese"),
    c(0xA9C4, None, "JAVANESE PADA MADYA", 0x00, "Javanese"),
    c(0xA9C5, None, "JAVANESE PADA LUHUR", 0x00, "Javanese"),
    c(0xA9C6, None, "JAVANESE PADA WINDU", 0x00, "Javanese"),
    c(0xA9C7, None, "JAVANESE PADA PANGKAT", 0x00, "Javanese"),
    c(0xA9C8, None, "JAVANESE PADA LINGSA", 0x00, "Javanese"),
    c(0xA9C9, None, "JAVANESE PADA LUNGSI", 0x00, "Javanese"),
    c(0xA9CA, None, "JAVANESE PADA ADEG", 0x00, "Javanese"),
    c(0xA9CB, None, "JAVANESE PADA ADEG ADEG", 0x00, "Javanese"),
    c(0xA9CC, None, "JAVANESE PADA PISELEH", 0x00, "Javanese"),
    c(0xA9CD, None, "JAVANESE TURNED PADA PISELEH", 0x00, "Javanese"),
    c(0xA9CF, None, "JAVANESE PANGRANGKEP", 0x31, "Javanese"),
    c(0xA9D0, None, "JAVANESE DIGIT ZERO", 0x20, "Javanese"),
    c(0xA9D1, None, "JAVANESE DIGIT ONE", 0x20, "Javanese"),
    c(0xA9D2, None, "JAVANESE DIGIT TWO", 0x20, "Javanese"),
    c(0xA9D3, None, "JAVANESE DIGIT THREE", 0x20, "Javanese"),
    c(0xA9D4, None, "JAVANESE DIGIT FOUR", 0x20, "Javanese"),
    c(0xA9D5, None, "JAVANESE DIGIT FIVE", 0x20, "Javanese"),
    c(0xA9D6, None, "JAVANESE DIGIT SIX", 0x20, "Javanese"),
    c(0xA9D7, None, "JAVANESE DIGIT SEVEN", 0x20, "Javanese"),
    c(0xA9D8, None, "JAVANESE DIGIT EIGHT", 0x20, "Javanese"),
    c(0xA9D9, None, "JAVANESE DIGIT NINE", 0x20, "Javanese"),
    c(0xA9DE, None, "JAVANESE PADA TIRTA TUMETES", 0x00, "Javanese"),
    c(0xA9DF, None, "JAVANESE PADA ISEN-ISEN", 0x00, "Javanese"),
    c(0xA9E0, None, "MYANMAR LETTER SHAN GHA", 0x31, "Myanmar_Ext_B"),
    c(0xA9E1, None, "MYANMAR LETTER SHAN CHA", 0x31, "Myanmar_Ext_B"),
    c(0xA9E2, None, "MYANMAR LETTER SHAN JHA", 0x31, "Myanmar_Ext_B"),
    c(0xA9E3, None, "MYANMAR LETTER SHAN NNA", 0x31, "Myanmar_Ext_B"),
    c(0xA9E4, None, "MYANMAR LETTER SHAN BHA", 0x31, "Myanmar_Ext_B"),
    c(0xA9E5, None, "MYANMAR SIGN SHAN SAW", 0x21, "Myanmar_Ext_B"),
    c(0xA9E6, None, "MYANMAR MODIFIER LETTER SHAN REDUPLICATION", 0x31, "Myanmar_Ext_B"),
    c(0xA9E7, None, "MYANMAR LETTER TAI LAING NYA", 0x31, "Myanmar_Ext_B"),
    c(0xA9E8, None, "MYANMAR LETTER TAI LAING FA", 0x31, "Myanmar_Ext_B"),
    c(0xA9E9, None, "MYANMAR LETTER TAI LAING GA", 0x31, "Myanmar_Ext_B"),
    c(0xA9EA, None, "MYANMAR LETTER TAI LAING GHA", 0x31, "Myanmar_Ext_B"),
    c(0xA9EB, None, "MYANMAR LETTER TAI LAING JA", 0x31, "Myanmar_Ext_B"),
    c(0xA9EC, None, "MYANMAR LETTER TAI LAING JHA", 0x31, "Myanmar_Ext_B"),
    c(0xA9ED, None, "MYANMAR LETTER TAI LAING DDA", 0x31, "Myanmar_Ext_B"),
    c(0xA9EE, None, "MYANMAR LETTER TAI LAING DDHA", 0x31, "Myanmar_Ext_B"),
    c(0xA9EF, None, "MYANMAR LETTER TAI LAING NNA", 0x31, "Myanmar_Ext_B"),
    c(0xA9F0, None, "MYANMAR TAI LAING DIGIT ZERO", 0x20, "Myanmar_Ext_B"),
    c(0xA9F1, None, "MYANMAR TAI LAING DIGIT ONE", 0x20, "Myanmar_Ext_B"),
    c(0xA9F2, None, "MYANMAR TAI LAING DIGIT TWO", 0x20, "Myanmar_Ext_B"),
    c(0xA9F3, None, "MYANMAR TAI LAING DIGIT THREE", 0x20, "Myanmar_Ext_B"),
    c(0xA9F4, None, "MYANMAR TAI LAING DIGIT FOUR", 0x20, "Myanmar_Ext_B"),
    c(0xA9F5, None, "MYANMAR TAI LAING DIGIT FIVE", 0x20, "Myanmar_Ext_B"),
    c(0xA9F6, None, "MYANMAR TAI LAING DIGIT SIX", 0x20, "Myanmar_Ext_B"),
    c(0xA9F7, None, "MYANMAR TAI LAING DIGIT SEVEN", 0x20, "Myanmar_Ext_B"),
    c(0xA9F8, None, "MYANMAR TAI LAING DIGIT EIGHT", 0x20, "Myanmar_Ext_B"),
    c(0xA9F9, None, "MYANMAR TAI LAING DIGIT NINE", 0x20, "Myanmar_Ext_B"),
    c(0xA9FA, None, "MYANMAR LETTER TAI LAING LLA", 0x31, "Myanmar_Ext_B"),
    c(0xA9FB, None, "MYANMAR LETTER TAI LAING DA", 0x31, "Myanmar_Ext_B"),
    c(0xA9FC, None, "MYANMAR LETTER TAI LAING DHA", 0x31, "Myanmar_Ext_B"),
    c(0xA9FD, None, "MYANMAR LETTER TAI LAING BA", 0x31, "Myanmar_Ext_B"),
    c(0xA9FE, None, "MYANMAR LETTER TAI LAING BHA", 0x31, "Myanmar_Ext_B"),
    c(0xAA00, None, "CHAM LETTER A", 0x31, "Cham"),
    c(0xAA01, None, "CHAM LETTER I", 0x31, "Cham"),
    c(0xAA02, None, "CHAM LETTER U", 0x31, "Cham"),
    c(0xAA03, None, "CHAM LETTER E", 0x31, "Cham"),
    c(0xAA04, None, "CHAM LETTER AI", 0x31, "Cham"),
    c(0xAA05, None, "CHAM LETTER O", 0x31, "Cham"),
    c(0xAA06, None, "CHAM LETTER KA", 0x31, "Cham"),
    c(0xAA07, None, "CHAM LETTER KHA", 0x31, "Cham"),
    c(0xAA08, None, "CHAM LETTER GA", 0x31, "Cham"),
    c(0xAA09, None, "CHAM LETTER GHA", 0x31, "Cham"),
    c(0xAA0A, None, "CHAM LETTER NGUE", 0x31, "Cham"),
    c(0xAA0B, None, "CHAM LETTER NGA", 0x31, "Cham"),
    c(0xAA0C, None, "CHAM LETTER CHA", 0x31, "Cham"),
    c(0xAA0D, None, "CHAM LETTER CHHA", 0x31, "Cham"),
    c(0xAA0E, None, "CHAM LETTER JA", 0x31, "Cham"),
    c(0xAA0F, None, "CHAM LETTER JHA", 0x31, "Cham"),
    c(0xAA10, None, "CHAM LETTER NHUE", 0x31, "Cham"),
    c(0xAA11, None, "CHAM LETTER NHA", 0x31, "Cham"),
    c(0xAA12, None, "CHAM LETTER NHJA", 0x31, "Cham"),
    c(0xAA13, None, "CHAM LETTER TA", 0x31, "Cham"),
    c(0xAA14, None, "CHAM LETTER THA", 0x31, "Cham"),
    c(0xAA15, None, "CHAM LETTER DA", 0x31, "Cham"),
    c(0xAA16, None, "CHAM LETTER DHA", 0x31, "Cham"),
    c(0xAA17, None, "CHAM LETTER NUE", 0x31, "Cham"),
    c(0xAA18, None, "CHAM LETTER NA", 0x31, "Cham"),
    c(0xAA19, None, "CHAM LETTER DDA", 0x31, "Cham"),
    c(0xAA1A, None, "CHAM LETTER PA", 0x31, "Cham"),
    c(0xAA1B, None, "CHAM LETTER PPA", 0x31, "Cham"),
    c(0xAA1C, None, "CHAM LETTER PHA", 0x31, "Cham"),
    c(0xAA1D, None, "CHAM LETTER BA", 0x31, "Cham"),
    c(0xAA1E, None, "CHAM LETTER BHA", 0x31, "Cham"),
    c(0xAA1F, None, "CHAM LETTER MUE", 0x31, "Cham"),
    c(0xAA20, None, "CHAM LETTER MA", 0x31, "Cham"),
    c(0xAA21, None, "CHAM LETTER BBA", 0x31, "Cham"),
    c(0xAA22, None, "CHAM LETTER YA", 0x31, "Cham"),
    c(0xAA23, None, "CHAM LETTER RA", 0x31, "Cham"),
    c(0xAA24, None, "CHAM LETTER LA", 0x31, "Cham"),
    c(0xAA25, None, "CHAM LETTER VA", 0x31, "Cham"),
    c(0xAA26, None, "CHAM LETTER SSA", 0x31, "Cham"),
    c(0xAA27, None, "CHAM LETTER SA", 0x31, "Cham"),
    c(0xAA28, None, "CHAM LETTER HA", 0x31, "Cham"),
    c(0xAA29, None, "CHAM VOWEL SIGN AA", 0x21, "Cham"),
    c(0xAA2A, None, "CHAM VOWEL SIGN I", 0x21, "Cham"),
    c(0xAA2B, None, "CHAM VOWEL SIGN II", 0x21, "Cham"),
    c(0xAA2C, None, "CHAM VOWEL SIGN EI", 0x21, "Cham"),
    c(0xAA2D, None, "CHAM VOWEL SIGN U", 0x21, "Cham"),
    c(0xAA2E, None, "CHAM VOWEL SIGN OE", 0x21, "Cham"),
    c(0xAA2F, None, "CHAM VOWEL SIGN O", 0x21, "Cham"),
    c(0xAA30, None, "CHAM VOWEL SIGN AI", 0x21, "Cham"),
    c(0xAA31, None, "CHAM VOWEL SIGN AU", 0x21, "Cham"),
    c(0xAA32, None, "CHAM VOWEL SIGN UE", 0x21, "Cham"),
    c(0xAA33, None, "CHAM CONSONANT SIGN YA", 0x21, "Cham"),
    c(0xAA34, None, "CHAM CONSONANT SIGN RA", 0x21, "Cham"),
    c(0xAA35, None, "CHAM CONSONANT SIGN LA", 0x21, "Cham"),
    c(0xAA36, None, "CHAM CONSONANT SIGN WA", 0x21, "Cham"),
    c(0xAA40, None, "CHAM LETTER FINAL K", 0x31, "Cham"),
    c(0xAA41, None, "CHAM LETTER FINAL G", 0x31, "Cham"),
    c(0xAA42, None, "CHAM LETTER FINAL NG", 0x31, "Cham"),
    c(0xAA43, None, "CHAM CONSONANT SIGN FINAL NG", 0x21, "Cham"),
    c(0xAA44, None, "CHAM LETTER FINAL CH", 0x31, "Cham"),
    c(0xAA45, None, "CHAM LETTER FINAL T", 0x31, "Cham"),
    c(0xAA46, None, "CHAM LETTER FINAL N", 0x31, "Cham"),
    c(0xAA47, None, "CHAM LETTER FINAL P", 0x31, "Cham"),
    c(0xAA48, None, "CHAM LETTER FINAL Y", 0x31, "Cham"),
    c(0xAA49, None, "CHAM LETTER FINAL R", 0x31, "Cham"),
    c(0xAA4A, None, "CHAM LETTER FINAL L", 0x31, "Cham"),
    c(0xAA4B, None, "CHAM LETTER FINAL SS", 0x31, "Cham"),
    c(0xAA4C, None, "CHAM CONSONANT SIGN FINAL M", 0x21, "Cham"),
    c(0xAA4D, None, "CHAM CONSONANT SIGN FINAL H", 0x21, "Cham"),
    c(0xAA50, None, "CHAM DIGIT ZERO", 0x20, "Cham"),
    c(0xAA51, None, "CHAM DIGIT ONE", 0x20, "Cham"),
    c(0xAA52, None, "CHAM DIGIT TWO", 0x20, "Cham"),
    c(0xAA53, None, "CHAM DIGIT THREE", 0x20, "Cham"),
    c(0xAA54, None, "CHAM DIGIT FOUR", 0x20, "Cham"),
    c(0xAA55, None, "CHAM DIGIT FIVE", 0x20, "Cham"),
    c(0xAA56, None, "CHAM DIGIT SIX", 0x20, "Cham"),
    c(0xAA57, None, "CHAM DIGIT SEVEN", 0x20, "Cham"),
    c(0xAA58, None, "CHAM DIGIT EIGHT", 0x20, "Cham"),
    c(0xAA59, None, "CHAM DIGIT NINE", 0x20, "Cham"),
    c(0xAA5C, None, "CHAM PUNCTUATION SPIRAL", 0x00, "Cham"),
    c(0xAA5D, None, "CHAM PUNCTUATION DANDA", 0x00, "Cham"),
    c(0xAA5E, None, "CHAM PUNCTUATION DOUBLE DANDA", 0x00, "Cham"),
    c(0xAA5F, None, "CHAM PUNCTUATION TRIPLE DANDA", 0x00, "Cham"),
    c(0xAA60, None, "MYANMAR LETTER KHAMTI GA", 0x31, "Myanmar_Ext_A"),
    c(0xAA61, None, "MYANMAR LETTER KHAMTI CA", 0x31, "Myanmar_Ext_A"),
    c(0xAA62, None, "MYANMAR LETTER KHAMTI CHA", 0x31, "Myanmar_Ext_A"),
    c(0xAA63, None, "MYANMAR LETTER KHAMTI JA", 0x31, "Myanmar_Ext_A"),
    c(0xAA64, None, "MYANMAR LETTER KHAMTI JHA", 0x31, "Myanmar_Ext_A"),
    c(0xAA65, None, "MYANMAR LETTER KHAMTI NYA", 0x31, "Myanmar_Ext_A"),
    c(0xAA66, None, "MYANMAR LETTER KHAMTI TTA", 0x31, "Myanmar_Ext_A"),
    c(0xAA67, None, "MYANMAR LETTER KHAMTI TTHA", 0x31, "Myanmar_Ext_A"),
    c(0xAA68, None, "MYANMAR LETTER KHAMTI DDA", 0x31, "Myanmar_Ext_A"),
    c(0xAA69, None, "MYANMAR LETTER KHAMTI DDHA", 0x31, "Myanmar_Ext_A"),
    c(0xAA6A, None, "MYANMAR LETTER KHAMTI DHA", 0x31, "Myanmar_Ext_A"),
    c(0xAA6B, None, "MYANMAR LETTER KHAMTI NA", 0x31, "Myanmar_Ext_A"),
    c(0xAA6C, None, "MYANMAR LETTER KHAMTI SA", 0x31, "Myanmar_Ext_A"),
    c(0xAA6D, None, "MYANMAR LETTER KHAMTI HA", 0x31, "Myanmar_Ext_A"),
    c(0xAA6E, None, "MYANMAR LETTER KHAMTI LLA", 0x31, "Myanmar_Ext_A"),
    c(0xAA6F, None, "MYANMAR LETTER KHAMTI FA", 0x31, "Myanmar_Ext_A"),
    c(0xAA70, None, "MYANMAR MODIFIER LETTER KHAMTI REDUPLICATION", 0x31, "Myanmar_Ext_A"),
    c(0xAA71, None, "MYANMAR LETTER KHAMTI XA", 0x31, "Myanmar_Ext_A"),
    c(0xAA72, None, "MYANMAR LETTER KHAMTI ZA", 0x31, "Myanmar_Ext_A"),
    c(0xAA73, None, "MYANMAR LETTER KHAMTI RA", 0x31, "Myanmar_Ext_A"),
    c(0xAA74, None, "MYANMAR LOGOGRAM KHAMTI OAY", 0x31, "Myanmar_Ext_A"),
    c(0xAA75, None, "MYANMAR LOGOGRAM KHAMTI QN", 0x31, "Myanmar_Ext_A"),
    c(0xAA76, None, "MYANMAR LOGOGRAM KHAMTI HM", 0x31, "Myanmar_Ext_A"),
    c(0xAA77, None, "MYANMAR SYMBOL AITON EXCLAMATION", 0x00, "Myanmar_Ext_A"),
    c(0xAA78, None, "MYANMAR SYMBOL AITON ONE", 0x00, "Myanmar_Ext_A"),
    c(0xAA79, None, "MYANMAR SYMBOL AITON TWO", 0x00, "Myanmar_Ext_A"),
    c(0xAA7A, None, "MYANMAR LETTER AITON RA", 0x31, "Myanmar_Ext_A"),
    c(0xAA7B, None, "MYANMAR SIGN PAO KAREN TONE", 0x21, "Myanmar_Ext_A"),
    c(0xAA7C, None, "MYANMAR SIGN TAI LAING TONE-2", 0x21, "Myanmar_Ext_A"),
    c(0xAA7D, None, "MYANMAR SIGN TAI LAING TONE-5", 0x21, "Myanmar_Ext_A"),
    c(0xAA7E, None, "MYANMAR LETTER SHWE PALAUNG CHA", 0x31, "Myanmar_Ext_A"),
    c(0xAA7F, None, "MYANMAR LETTER SHWE PALAUNG SHA", 0x31, "Myanmar_Ext_A"),
    c(0xAA80, None, "TAI VIET LETTER LOW KO", 0x31, "Tai_Viet"),
    c(0xAA81, None, "TAI VIET LETTER HIGH KO", 0x31, "Tai_Viet"),
    c(0xAA82, None, "TAI VIET LETTER LOW KHO", 0x31, "Tai_Viet"),
    c(0xAA83, None, "TAI VIET LETTER HIGH KHO", 0x31, "Tai_Viet"),
    c(0xAA84, None, "TAI VIET LETTER LOW KHHO", 0x31, "Tai_Viet"),
    c(0xAA85, None, "TAI VIET LETTER HIGH KHHO", 0x31, "Tai_Viet"),
    c(0xAA86, None, "TAI VIET LETTER LOW GO", 0x31, "Tai_Viet"),
    c(0xAA87, None, "TAI VIET LETTER HIGH GO", 0x31, "Tai_Viet"),
    c(0xAA88, None, "TAI VIET LETTER LOW NGO", 0x31, "Tai_Viet"),
    c(0xAA89, None, "TAI VIET LETTER HIGH NGO", 0x31, "Tai_Viet"),
    c(0xAA8A, None, "TAI VIET LETTER LOW CO", 0x31, "Tai_Viet"),
    c(0xAA8B, None, "TAI VIET LETTER HIGH CO", 0x31, "Tai_Viet"),
    c(0xAA8C, None, "TAI VIET LETTER LOW CHO", 0x31, "Tai_Viet"),
    c(0xAA8D, None, "TAI VIET LETTER HIGH CHO", 0x31, "Tai_Viet"),
    c(0xAA8E, None, "TAI VIET LETTER LOW SO", 0x31, "Tai_Viet"),
    c(0xAA8F, None, "TAI VIET LETTER HIGH SO", 0x31, "Tai_Viet"),
    c(0xAA90, None, "TAI VIET LETTER LOW NYO", 0x31, "Tai_Viet"),
    c(0xAA91, None, "TAI VIET LETTER HIGH NYO", 0x31, "Tai_Viet"),
    c(0xAA92, None, "TAI VIET LETTER LOW DO", 0x31, "Tai_Viet"),
    c(0xAA93, None, "TAI VIET LETTER HIGH DO", 0x31, "Tai_Viet"),
    c(0xAA94, None, "TAI VIET LETTER LOW TO", 0x31, "Tai_Viet"),
    c(0xAA95, None, "TAI VIET LETTER HIGH TO", 0x31, "Tai_Viet"),
    c(0xAA96, None, "TAI VIET LETTER LOW THO", 0x31, "Tai_Viet"),
    c(0xAA97, None, "TAI VIET LETTER HIGH THO", 0x31, "Tai_Viet"),
    c(0xAA98, None, "TAI VIET LETTER LOW NO", 0x31, "Tai_Viet"),
    c(0xAA99, None, "TAI VIET LETTER HIGH NO", 0x31, "Tai_Viet"),
    c(0xAA9A, None, "TAI VIET LETTER LOW BO", 0x31, "Tai_Viet"),
    c(0xAA9B, None, "TAI VIET LETTER HIGH BO", 0x31, "Tai_Viet"),
    c(0xAA9C, None, "TAI VIET LETTER LOW PO", 0x31, "Tai_Viet"),
    c(0xAA9D, None, "TAI VIET LETTER HIGH PO", 0x31, "Tai_Viet"),
    c(0xAA9E, None, "TAI VIET LETTER LOW PHO", 0x31, "Tai_Viet"),
    c(0xAA9F, None, "TAI VIET LETTER HIGH PHO", 0x31, "Tai_Viet"),
    c(0xAAA0, None, "TAI VIET LETTER LOW FO", 0x31, "Tai_Viet"),
    c(0xAAA1, None, "TAI VIET LETTER HIGH FO", 0x31, "Tai_Viet"),
    c(0xAAA2, None, "TAI VIET LETTER LOW MO", 0x31, "Tai_Viet"),
    c(0xAAA3, None, "TAI VIET LETTER HIGH MO", 0x31, "Tai_Viet"),
    c(0xAAA4, None, "TAI VIET LETTER LOW YO", 0x31, "Tai_Viet"),
    c(0xAAA5, None, "TAI VIET LETTER HIGH YO", 0x31, "Tai_Viet"),
    c(0xAAA6, None, "TAI VIET LETTER LOW RO", 0x31, "Tai_Viet"),
    c(0xAAA7, None, "TAI VIET LETTER HIGH RO", 0x31, "Tai_Viet"),
    c(0xAAA8, None, "TAI VIET LETTER LOW LO", 0x31, "Tai_Viet"),
    c(0xAAA9, None, "TAI VIET LETTER HIGH LO", 0x31, "Tai_Viet"),
    c(0xAAAA, None, "TAI VIET LETTER LOW VO", 0x31, "Tai_Viet"),
    c(0xAAAB, None, "TAI VIET LETTER HIGH VO", 0x31, "Tai_Viet"),
    c(0xAAAC, None, "TAI VIET LETTER LOW HO", 0x31, "Tai_Viet"),
    c(0xAAAD, None, "TAI VIET LETTER HIGH HO", 0x31, "Tai_Viet"),
    c(0xAAAE, None, "TAI VIET LETTER LOW O", 0x31, "Tai_Viet"),
    c(0xAAAF, None, "TAI VIET LETTER HIGH O", 0x31, "Tai_Viet"),
    c(0xAAB0, None, "TAI VIET MAI KANG", 0x21, "Tai_Viet"),
    c(0xAAB1, None, "TAI VIET VOWEL AA", 0x31, "Tai_Viet"),
    c(0xAAB2, None, "TAI VIET VOWEL I", 0x21, "Tai_Viet"),
    c(0xAAB3, None, "TAI VIET VOWEL UE", 0x21, "Tai_Viet"),
    c(0xAAB4, None, "TAI VIET VOWEL U", 0x21, "Tai_Viet"),
    c(0xAAB5, None, "TAI VIET VOWEL E", 0x31, "Tai_Viet"),
    c(0xAAB6, None, "TAI VIET VOWEL O", 0x31, "Tai_Viet"),
    c(0xAAB7, None, "TAI VIET MAI KHIT", 0x21, "Tai_Viet"),
    c(0xAAB8, None, "TAI VIET VOWEL IA", 0x21, "Tai_Viet"),
    c(0xAAB9, None, "TAI VIET VOWEL UEA", 0x31, "Tai_Viet"),
    c(0xAABA, None, "TAI VIET VOWEL UA", 0x31, "Tai_Viet"),
    c(0xAABB, None, "TAI VIET VOWEL AUE", 0x31, "Tai_Viet"),
    c(0xAABC, None, "TAI VIET VOWEL AY", 0x31, "Tai_Viet"),
    c(0xAABD, None, "TAI VIET VOWEL AN", 0x31, "Tai_Viet"),
    c(0xAABE, None, "TAI VIET VOWEL AM", 0x21, "Tai_Viet"),
    c(0xAABF, None, "TAI VIET TONE MAI EK", 0x20, "Tai_Viet"),
    c(0xAAC0, None, "TAI VIET TONE MAI NUENG", 0x31, "Tai_Viet"),
    c(0xAAC1, None, "TAI VIET TONE MAI THO", 0x20, "Tai_Viet"),
    c(0xAAC2, None, "TAI VIET TONE MAI SONG", 0x31, "Tai_Viet"),
    c(0xAADB, None, "TAI VIET SYMBOL KON", 0x31, "Tai_Viet"),
    c(0xAADC, None, "TAI VIET SYMBOL NUENG", 0x31, "Tai_Viet"),
    c(0xAADD, None, "TAI VIET SYMBOL SAM", 0x31, "Tai_Viet"),
    c(0xAADE, None, "TAI VIET SYMBOL HO HOI", 0x00, "Tai_Viet"),
    c(0xAADF, None, "TAI VIET SYMBOL KOI KOI", 0x00, "Tai_Viet"),
    c(0xAAE0, None, "MEETEI MAYEK LETTER E", 0x31, "Meetei_Mayek_Ext"),
    c(0xAAE1, None, "MEETEI MAYEK LETTER O", 0x31, "Meetei_Mayek_Ext"),
    c(0xAAE2, None, "MEETEI MAYEK LETTER CHA", 0x31, "Meetei_Mayek_Ext"),
    c(0xAAE3, None, "MEETEI MAYEK LETTER NYA", 0x31, "Meetei_Mayek_Ext"),
    c(0xAAE4, None, "MEETEI MAYEK LETTER TTA", 0x31, "Meetei_Mayek_Ext"),
    c(0xAAE5, None, "MEETEI MAYEK LETTER TTHA", 0x31, "Meetei_Mayek_Ext"),
    c(0xAAE6, None, "MEETEI MAYEK LETTER DDA", 0x31, "Meetei_Mayek_Ext"),
    c(0xAAE7, None, "MEETEI MAYEK LETTER DDHA", 0x31, "Meetei_Mayek_Ext"),
    c(0xAAE8, None, "MEETEI MAYEK LETTER NNA", 0x31, "Meetei_Mayek_Ext"),
    c(0xAAE9, None, "MEETEI MAYEK LETTER SHA", 0x31, "Meetei_Mayek_Ext"),
    c(0xAAEA, None, "MEETEI MAYEK LETTER SSA", 0x31, "Meetei_Mayek_Ext"),
    c(0xAAEB, None, "MEETEI MAYEK VOWEL SIGN II", 0x21, "Meetei_Mayek_Ext"),
    c(0xAAEC, None, "MEETEI MAYEK VOWEL SIGN UU", 0x21, "Meetei_Mayek_Ext"),
    c(0xAAED, None, "MEETEI MAYEK VOWEL SIGN AAI", 0x21, "Meetei_Mayek_Ext"),
    c(0xAAEE, None, "MEETEI MAYEK VOWEL SIGN AU", 0x21, "Meetei_Mayek_Ext"),
    c(0xAAEF, None, "MEETEI MAYEK VOWEL SIGN AAU", 0x21, "Meetei_Mayek_Ext"),
    c(0xAAF0, None, "MEETEI MAYEK CHEIKHAN", 0x00, "Meetei_Mayek_Ext"),
    c(0xAAF1, None, "MEETEI MAYEK AHANG KHUDAM", 0x00, "Meetei_Mayek_Ext"),
    c(0xAAF2, None, "MEETEI MAYEK ANJI", 0x31, "Meetei_Mayek_Ext"),
    c(0xAAF3, None, "MEETEI MAYEK SYLLABLE REPETITION MARK", 0x31, "Meetei_Mayek_Ext"),
    c(0xAAF4, None, "MEETEI MAYEK WORD REPETITION MARK", 0x31, "Meetei_Mayek_Ext"),
    c(0xAAF5, None, "MEETEI MAYEK VOWEL SIGN VISARGA", 0x21, "Meetei_Mayek_Ext"),
    c(0xAAF6, None, "MEETEI MAYEK VIRAMA", 0x20, "Meetei_Mayek_Ext"),
    c(0xAB01, None, "ETHIOPIC SYLLABLE TTHU", 0x31, "Ethiopic_Ext_A"),
    c(0xAB02, None, "ETHIOPIC SYLLABLE TTHI", 0x31, "Ethiopic_Ext_A"),
    c(0xAB03, None, "ETHIOPIC SYLLABLE TTHAA", 0x31, "Ethiopic_Ext_A"),
    c(0xAB04, None, "ETHIOPIC SYLLABLE TTHEE", 0x31, "Ethiopic_Ext_A"),
    c(0xAB05, None, "ETHIOPIC SYLLABLE TTHE", 0x31, "Ethiopic_Ext_A"),
    c(0xAB06, None, "ETHIOPIC SYLLABLE TTHO", 0x31, "Ethiopic_Ext_A"),
    c(0xAB09, None, "ETHIOPIC SYLLABLE DDHU", 0x31, "Ethiopic_Ext_A"),
    c(0xAB0A, None, "ETHIOPIC SYLLABLE DDHI", 0x31, "Ethiopic_Ext_A"),
    c(0xAB0B, None, "ETHIOPIC SYLLABLE DDHAA", 0x31, "Ethiopic_Ext_A"),
    c(0xAB0C, None, "ETHIOPIC SYLLABLE DDHEE", 0x31, "Ethiopic_Ext_A"),
    c(0xAB0D, None, "ETHIOPIC SYLLABLE DDHE", 0x31, "Ethiopic_Ext_A"),
    c(0xAB0E, None, "ETHIOPIC SYLLABLE DDHO", 0x31, "Ethiopic_Ext_A"),
    c(0xAB11, None, "ETHIOPIC SYLLABLE DZU", 0x31, "Ethiopic_Ext_A"),
    c(0xAB12, None, "ETHIOPIC SYLLABLE DZI", 0x31, "Ethiopic_Ext_A"),
    c(0xAB13, None, "ETHIOPIC SYLLABLE DZAA", 0x31, "Ethiopic_Ext_A"),
    c(0xAB14, None, "ETHIOPIC SYLLABLE DZEE", 0x31, "Ethiopic_Ext_A"),
    c(0xAB15, None, "ETHIOPIC SYLLABLE DZE", 0x31, "Ethiopic_Ext_A"),
    c(0xAB16, None, "ETHIOPIC SYLLABLE DZO", 0x31, "Ethiopic_Ext_A"),
    c(0xAB20, None, "ETHIOPIC SYLLABLE CCHHA", 0x31, "Ethiopic_Ext_A"),
    c(0xAB21, None, "ETHIOPIC SYLLABLE CCHHU", 0x31, "Ethiopic_Ext_A"),
    c(0xAB22, None, "ETHIOPIC SYLLABLE CCHHI", 0x31, "Ethiopic_Ext_A"),
    c(0xAB23, None, "ETHIOPIC SYLLABLE CCHHAA", 0x31, "Ethiopic_Ext_A"),
    c(0xAB24, None, "ETHIOPIC SYLLABLE CCHHEE", 0x31, "Ethiopic_Ext_A"),
    c(0xAB25, None, "ETHIOPIC SYLLABLE CCHHE", 0x31, "Ethiopic_Ext_A"),
    c(0xAB26, None, "ETHIOPIC SYLLABLE CCHHO", 0x31, "Ethiopic_Ext_A"),
    c(0xAB28, None, "ETHIOPIC SYLLABLE BBA", 0x31, "Ethiopic_Ext_A"),
    c(0xAB29, None, "ETHIOPIC SYLLABLE BBU", 0x31, "Ethiopic_Ext_A"),
    c(0xAB2A, None, "ETHIOPIC SYLLABLE BBI", 0x31, "Ethiopic_Ext_A"),
    c(0xAB2B, None, "ETHIOPIC SYLLABLE BBAA", 0x31, "Ethiopic_Ext_A"),
    c(0xAB2C, None, "ETHIOPIC SYLLABLE BBEE", 0x31, "Ethiopic_Ext_A"),
    c(0xAB2D, None, "ETHIOPIC SYLLABLE BBE", 0x31, "Ethiopic_Ext_A"),
    c(0xAB2E, None, "ETHIOPIC SYLLABLE BBO", 0x31, "Ethiopic_Ext_A"),
    c(0xAB30, None, "LATIN SMALL LETTER BARRED ALPHA", 0x31, "Latin_Ext_E"),
    c(0xAB31, None, "LATIN SMALL LETTER A REVERSED-SCHWA", 0x31, "Latin_Ext_E"),
    c(0xAB32, None, "LATIN SMALL LETTER BLACKLETTER E", 0x31, "Latin_Ext_E"),
    c(0xAB33, None, "LATIN SMALL LETTER BARRED E", 0x31, "Latin_Ext_E"),
    c(0xAB34, None, "LATIN SMALL LETTER E WITH FLOURISH", 0x31, "Latin_Ext_E"),
    c(0xAB35, None, "LATIN SMALL LETTER LENIS F", 0x31, "Latin_Ext_E"),
    c(0xAB36, None, "LATIN SMALL LETTER SCRIPT G WITH CROSSED-TAIL", 0x31, "Latin_Ext_E"),
    c(0xAB37, None, "LATIN SMALL LETTER L WITH INVERTED LAZY S", 0x31, "Latin_Ext_E"),
    c(0xAB38, None, "LATIN SMALL LETTER L WITH DOUBLE MIDDLE TILDE", 0x31, "Latin_Ext_E"),
    c(0xAB39, None, "LATIN SMALL LETTER L WITH MIDDLE RING", 0x31, "Latin_Ext_E"),
    c(0xAB3A, None, "LATIN SMALL LETTER M WITH CROSSED-TAIL", 0x31, "Latin_Ext_E"),
    c(0xAB3B, None, "LATIN SMALL LETTER N WITH CROSSED-TAIL", 0x31, "Latin_Ext_E"),
    c(0xAB3C, None, "LATIN SMALL LETTER ENG WITH CROSSED-TAIL", 0x31, "Latin_Ext_E"),
    c(0xAB3D, None, "LATIN SMALL LETTER BLACKLETTER O", 0x31, "Latin_Ext_E"),
    c(0xAB3E, None, "LATIN SMALL LETTER BLACKLETTER O WITH STROKE", 0x31, "Latin_Ext_E"),
    c(0xAB3F, None, "LATIN SMALL LETTER OPEN O WITH STROKE", 0x31, "Latin_Ext_E"),
    c(0xAB40, None, "LATIN SMALL LETTER INVERTED OE", 0x31, "Latin_Ext_E"),
    c(0xAB41, None, "LATIN SMALL LETTER TURNED OE WITH STROKE", 0x31, "Latin_Ext_E"),
    c(0xAB42, None, "LATIN SMALL LETTER TURNED OE WITH HORIZONTAL STROKE", 0x31, "Latin_Ext_E"),
    c(0xAB43, None, "LATIN SMALL LETTER TURNED O OPEN-O", 0x31, "Latin_Ext_E"),
    c(0xAB44, None, "LATIN SMALL LETTER TURNED O OPEN-O WITH STROKE", 0x31, "Latin_Ext_E"),
    c(0xAB45, None, "LATIN SMALL LETTER STIRRUP R", 0x31, "Latin_Ext_E"),
    c(0xAB46, None, "LATIN LETTER SMALL CAPITAL R WITH RIGHT LEG", 0x31, "Latin_Ext_E"),
    c(0xAB47, None, "LATIN SMALL LETTER R WITHOUT HANDLE", 0x31, "Latin_Ext_E"),
    c(0xAB48, None, "LATIN SMALL LETTER DOUBLE R", 0x31, "Latin_Ext_E"),
    c(0xAB49, None, "LATIN SMALL LETTER R WITH CROSSED-TAIL", 0x31, "Latin_Ext_E"),
    c(0xAB4A, None, "LATIN SMALL LETTER DOUBLE R WITH CROSSED-TAIL", 0x31, "Latin_Ext_E"),
    c(0xAB4B, None, "LATIN SMALL LETTER SCRIPT R", 0x31, "Latin_Ext_E"),
    c(0xAB4C, None, "LATIN SMALL LETTER SCRIPT R WITH RING", 0x31, "Latin_Ext_E"),
    c(0xAB4D, None, "LATIN SMALL LETTER BASELINE ESH", 0x31, "Latin_Ext_E"),
    c(0xAB4E, None, "LATIN SMALL LETTER U WITH SHORT RIGHT LEG", 0x31, "Latin_Ext_E"),
    c(0xAB4F, None, "LATIN SMALL LETTER U BAR WITH SHORT RIGHT LEG", 0x31, "Latin_Ext_E"),
    c(0xAB50, None, "LATIN SMALL LETTER UI", 0x31, "Latin_Ext_E"),
    c(0xAB51, None, "LATIN SMALL LETTER TURNED UI", 0x31, "Latin_Ext_E"),
    c(0xAB52, None, "LATIN SMALL LETTER U WITH LEFT HOOK", 0x31, "Latin_Ext_E"),
    c(0xAB53, None, "LATIN SMALL LETTER CHI", 0x31, "Latin_Ext_E"),
    c(0xAB54, None, "LATIN SMALL LETTER CHI WITH LOW RIGHT RING", 0x31, "Latin_Ext_E"),
    c(0xAB55, None, "LATIN SMALL LETTER CHI WITH LOW LEFT SERIF", 0x31, "Latin_Ext_E"),
    c(0xAB56, None, "LATIN SMALL LETTER X WITH LOW RIGHT RING", 0x31, "Latin_Ext_E"),
    c(0xAB57, None, "LATIN SMALL LETTER X WITH LONG LEFT LEG", 0x31, "Latin_Ext_E"),
    c(0xAB58, None, "LATIN SMALL LETTER X WITH LONG LEFT LEG AND LOW RIGHT RING", 0x31, "Latin_Ext_E"),
    c(0xAB59, None, "LATIN SMALL LETTER X WITH LONG LEFT LEG WITH SERIF", 0x31, "Latin_Ext_E"),
    c(0xAB5A, None, "LATIN SMALL LETTER Y WITH SHORT RIGHT LEG", 0x31, "Latin_Ext_E"),
    c(0xAB5B, None, "MODIFIER BREVE WITH INVERTED BREVE", 0x00, "Latin_Ext_E"),
    c(0xAB5C, None, "MODIFIER LETTER SMALL HENG", 0x31, "Latin_Ext_E"),
    c(0xAB5D, None, "MODIFIER LETTER SMALL L WITH INVERTED LAZY S", 0x31, "Latin_Ext_E"),
    c(0xAB5E, None, "MODIFIER LETTER SMALL L WITH MIDDLE TILDE", 0x31, "Latin_Ext_E"),
    c(0xAB5F, None, "MODIFIER LETTER SMALL U WITH LEFT HOOK", 0x31, "Latin_Ext_E"),
    c(0xAB60, None, "LATIN SMALL LETTER SAKHA YAT", 0x31, "Latin_Ext_E"),
    c(0xAB61, None, "LATIN SMALL LETTER IOTIFIED E", 0x31, "Latin_Ext_E"),
    c(0xAB62, None, "LATIN SMALL LETTER OPEN OE", 0x31, "Latin_Ext_E"),
    c(0xAB63, None, "LATIN SMALL LETTER UO", 0x31, "Latin_Ext_E"),
    c(0xAB64, None, "LATIN SMALL LETTER INVERTED ALPHA", 0x31, "Latin_Ext_E"),
    c(0xAB65, None, "GREEK LETTER SMALL CAPITAL OMEGA", 0x31, "Latin_Ext_E"),
    c(0xAB66, None, "LATIN SMALL LETTER DZ DIGRAPH WITH RETROFLEX HOOK", 0x31, "Latin_Ext_E"),
    c(0xAB67, None, "LATIN SMALL LETTER TS DIGRAPH WITH RETROFLEX HOOK", 0x31, "Latin_Ext_E"),
    c(0xAB68, None, "LATIN SMALL LETTER TURNED R WITH MIDDLE TILDE", 0x31, "Latin_Ext_E"),
    c(0xAB69, None, "MODIFIER LETTER SMALL TURNED W", 0x31, "Latin_Ext_E"),
    c(0xAB6A, None, "MODIFIER LETTER LEFT TACK", 0x00, "Latin_Ext_E"),
    c(0xAB6B, None, "MODIFIER LETTER RIGHT TACK", 0x00, "Latin_Ext_E"),
    c(0xAB70, None, "CHEROKEE SMALL LETTER A", 0x31, "Cherokee_Sup"),
    c(0xAB71, None, "CHEROKEE SMALL LETTER E", 0x31, "Cherokee_Sup"),
    c(0xAB72, None, "CHEROKEE SMALL LETTER I", 0x31, "Cherokee_Sup"),
    c(0xAB73, None, "CHEROKEE SMALL LETTER O", 0x31, "Cherokee_Sup"),
    c(0xAB74, None, "CHEROKEE SMALL LETTER U", 0x31, "Cherokee_Sup"),
    c(0xAB75, None, "CHEROKEE SMALL LETTER V", 0x31, "Cherokee_Sup"),
    c(0xAB76, None, "CHEROKEE SMALL LETTER GA", 0x31, "Cherokee_Sup"),
    c(0xAB77, None, "CHEROKEE SMALL LETTER KA", 0x31, "Cherokee_Sup"),
    c(0xAB78, None, "CHEROKEE SMALL LETTER GE", 0x31, "Cherokee_Sup"),
    c(0xAB79, None, "CHEROKEE SMALL LETTER GI", 0x31, "Cherokee_Sup"),
    c(0xAB7A, None, "CHEROKEE SMALL LETTER GO", 0x31, "Cherokee_Sup"),
    c(0xAB7B, None, "CHEROKEE SMALL LETTER GU", 0x31, "Cherokee_Sup"),
    c(0xAB7C, None, "CHEROKEE SMALL LETTER GV", 0x31, "Cherokee_Sup"),
    c(0xAB7D, None, "CHEROKEE SMALL LETTER HA", 0x31, "Cherokee_Sup"),
    c(0xAB7E, None, "CHEROKEE SMALL LETTER HE", 0x31, "Cherokee_Sup"),
    c(0xAB7F, None, "CHEROKEE SMALL LETTER HI", 0x31, "Cherokee_Sup"),
    c(0xAB80, None, "CHEROKEE SMALL LETTER HO", 0x31, "Cherokee_Sup"),
    c(0xAB81, None, "CHEROKEE SMALL LETTER HU", 0x31, "Cherokee_Sup"),
    c(0xAB82, None, "CHEROKEE SMALL LETTER HV", 0x31, "Cherokee_Sup"),
    c(0xAB83, None, "CHEROKEE SMALL LETTER LA", 0x31, "Cherokee_Sup"),
    c(0xAB84, None, "CHEROKEE SMALL LETTER LE", 0x31, "Cherokee_Sup"),
    c(0xAB85, None, "CHEROKEE SMALL LETTER LI", 0x31, "Cherokee_Sup"),
    c(0xAB86, None, "CHEROKEE SMALL LETTER LO", 0x31, "Cherokee_Sup"),
    c(0xAB87, None, "CHEROKEE SMALL LETTER LU", 0x31, "Cherokee_Sup"),
    c(0xAB88, None, "CHEROKEE SMALL LETTER LV", 0x31, "Cherokee_Sup"),
    c(0xAB89, None, "CHEROKEE SMALL LETTER MA", 0x31, "Cherokee_Sup"),
    c(0xAB8A, None, "CHEROKEE SMALL LETTER ME", 0x31, "Cherokee_Sup"),
    c(0xAB8B, None, "CHEROKEE SMALL LETTER MI", 0x31, "Cherokee_Sup"),
    c(0xAB8C, None, "CHEROKEE SMALL LETTER MO", 0x31, "Cherokee_Sup"),
    c(0xAB8D, None, "CHEROKEE SMALL LETTER MU", 0x31, "Cherokee_Sup"),
    c(0xAB8E, None, "CHEROKEE SMALL LETTER NA", 0x31, "Cherokee_Sup"),
    c(0xAB8F, None, "CHEROKEE SMALL LETTER HNA", 0x31, "Cherokee_Sup"),
    c(0xAB90, None, "CHEROKEE SMALL LETTER NAH", 0x31, "Cherokee_Sup"),
    c(0xAB91, None, "CHEROKEE SMALL LETTER NE", 0x31, "Cherokee_Sup"),
    c(0xAB92, None, "CHEROKEE SMALL LETTER NI", 0x31, "Cherokee_Sup"),
    c(0xAB93, None, "CHEROKEE SMALL LETTER NO", 0x31, "Cherokee_Sup"),
    c(0xAB94, None, "CHEROKEE SMALL LETTER NU", 0x31, "Cherokee_Sup"),
    c(0xAB95, None, "CHEROKEE SMALL LETTER NV", 0x31, "Cherokee_Sup"),
    c(0xAB96, None, "CHEROKEE SMALL LETTER QUA", 0x31, "Cherokee_Sup"),
    c(0xAB97, None, "CHEROKEE SMALL LETTER QUE", 0x31, "Cherokee_Sup"),
    c(0xAB98, None, "CHEROKEE SMALL LETTER QUI", 0x31, "Cherokee_Sup"),
    c(0xAB99, None, "CHEROKEE SMALL LETTER QUO", 0x31, "Cherokee_Sup"),
    c(0xAB9A, None, "CHEROKEE SMALL LETTER QUU", 0x31, "Cherokee_Sup"),
    c(0xAB9B, None, "CHEROKEE SMALL LETTER QUV", 0x31, "Cherokee_Sup"),
    c(0xAB9C, None, "CHEROKEE SMALL LETTER SA", 0x31, "Cherokee_Sup"),
    c(0xAB9D, None, "CHEROKEE SMALL LETTER S", 0x31, "Cherokee_Sup"),
    c(0xAB9E, None, "CHEROKEE SMALL LETTER SE", 0x31, "Cherokee_Sup"),
    c(0xAB9F, None, "CHEROKEE SMALL LETTER SI", 0x31, "Cherokee_Sup"),
    c(0xABA0, None, "CHEROKEE SMALL LETTER SO", 0x31, "Cherokee_Sup"),
    c(0xABA1, None, "CHEROKEE SMALL LETTER SU", 0x31, "Cherokee_Sup"),
    c(0xABA2, None, "CHEROKEE SMALL LETTER SV", 0x31, "Cherokee_Sup"),
    c(0xABA3, None, "CHEROKEE SMALL LETTER DA", 0x31, "Cherokee_Sup"),
    c(0xABA4, None, "CHEROKEE SMALL LETTER TA", 0x31, "Cherokee_Sup"),
    c(0xABA5, None, "CHEROKEE SMALL LETTER DE", 0x31, "Cherokee_Sup"),
    c(0xABA6, None, "CHEROKEE SMALL LETTER TE", 0x31, "Cherokee_Sup"),
    c(0xABA7, None, "CHEROKEE SMALL LETTER DI", 0x31, "Cherokee_Sup"),
    c(0xABA8, None, "CHEROKEE SMALL LETTER TI", 0x31, "Cherokee_Sup"),
    c(0xABA9, None, "CHEROKEE SMALL LETTER DO", 0x31, "Cherokee_Sup"),
    c(0xABAA, None, "CHEROKEE SMALL LETTER DU", 0x31, "Cherokee_Sup"),
    c(0xABAB, None, "CHEROKEE SMALL LETTER DV", 0x31, "Cherokee_Sup"),
    c(0xABAC, None, "CHEROKEE SMALL LETTER DLA", 0x31, "Cherokee_Sup"),
    c(0xABAD, None, "CHEROKEE SMALL LETTER TLA", 0x31, "Cherokee_Sup"),
    c(0xABAE, None, "CHEROKEE SMALL LETTER TLE", 0x31, "Cherokee_Sup"),
    c(0xABAF, None, "CHEROKEE SMALL LETTER TLI", 0x31, "Cherokee_Sup"),
    c(0xABB0, None, "CHEROKEE SMALL LETTER TLO", 0x31, "Cherokee_Sup"),
    c(0xABB1, None, "CHEROKEE SMALL LETTER TLU", 0x31, "Cherokee_Sup"),
    c(0xABB2, None, "CHEROKEE SMALL LETTER TLV", 0x31, "Cherokee_Sup"),
    c(0xABB3, None, "CHEROKEE SMALL LETTER TSA", 0x31, "Cherokee_Sup"),
    c(0xABB4, None, "CHEROKEE SMALL LETTER TSE", 0x31, "Cherokee_Sup"),
    c(0xABB5, None, "CHEROKEE SMALL LETTER TSI", 0x31, "Cherokee_Sup"),
    c(0xABB6, None, "CHEROKEE SMALL LETTER TSO", 0x31, "Cherokee_Sup"),
    c(0xABB7, None, "CHEROKEE SMALL LETTER TSU", 0x31, "Cherokee_Sup"),
    c(0xABB8, None, "CHEROKEE SMALL LETTER TSV", 0x31, "Cherokee_Sup"),
    c(0xABB9, None, "CHEROKEE SMALL LETTER WA", 0x31, "Cherokee_Sup"),
    c(0xABBA, None, "CHEROKEE SMALL LETTER WE", 0x31, "Cherokee_Sup"),
    c(0xABBB, None, "CHEROKEE SMALL LETTER WI", 0x31, "Cherokee_Sup"),
    c(0xABBC, None, "CHEROKEE SMALL LETTER WO", 0x31, "Cherokee_Sup"),
    c(0xABBD, None, "CHEROKEE SMALL LETTER WU", 0x31, "Cherokee_Sup"),
    c(0xABBE, None, "CHEROKEE SMALL LETTER WV", 0x31, "Cherokee_Sup"),
    c(0xABBF, None, "CHEROKEE SMALL LETTER YA", 0x31, "Cherokee_Sup"),
    c(0xABC0, None, "MEETEI MAYEK LETTER KOK", 0x31, "Meetei_Mayek"),
    c(0xABC1, None, "MEETEI MAYEK LETTER SAM", 0x31, "Meetei_Mayek"),
    c(0xABC2, None, "MEETEI MAYEK LETTER LAI", 0x31, "Meetei_Mayek"),
    c(0xABC3, None, "MEETEI MAYEK LETTER MIT", 0x31, "Meetei_Mayek"),
    c(0xABC4, None, "MEETEI MAYEK LETTER PA", 0x31, "Meetei_Mayek"),
    c(0xABC5, None, "MEETEI MAYEK LETTER NA", 0x31, "Meetei_Mayek"),
    c(0xABC6, None, "MEETEI MAYEK LETTER CHIL", 0x31, "Meetei_Mayek"),
    c(0xABC7, None, "MEETEI MAYEK LETTER TIL", 0x31, "Meetei_Mayek"),
    c(0xABC8, None, "MEETEI MAYEK LETTER KHOU", 0x31, "Meetei_Mayek"),
    c(0xABC9, None, "MEETEI MAYEK LETTER NGOU", 0x31, "Meetei_Mayek"),
    c(0xABCA, None, "MEETEI MAYEK LETTER THOU", 0x31, "Meetei_Mayek"),
    c(0xABCB, None, "MEETEI MAYEK LETTER WAI", 0x31, "Meetei_Mayek"),
    c(0xABCC, None, "MEETEI MAYEK LETTER YANG", 0x31, "Meetei_Mayek"),
    c(0xABCD, None, "MEETEI MAYEK LETTER HUK", 0x31, "Meetei_Mayek"),
    c(0xABCE, None, "MEETEI MAYEK LETTER UN", 0x31, "Meetei_Mayek"),
    c(0xABCF, None, "MEETEI MAYEK LETTER I", 0x31, "Meetei_Mayek"),
    c(0xABD0, None, "MEETEI MAYEK LETTER PHAM", 0x31, "Meetei_Mayek"),
    c(0xABD1, None, "MEETEI MAYEK LETTER ATIYA", 0x31, "Meetei_Mayek"),
    c(0xABD2, None, "MEETEI MAYEK LETTER GOK", 0x31, "Meetei_Mayek"),
    c(0xABD3, None, "MEETEI MAYEK LETTER JHAM", 0x31, "Meetei_Mayek"),
    c(0xABD4, None, "MEETEI MAYEK LETTER RAI", 0x31, "Meetei_Mayek"),
    c(0xABD5, None, "MEETEI MAYEK LETTER BA", 0x31, "Meetei_Mayek"),
    c(0xABD6, None, "MEETEI MAYEK LETTER JIL", 0x31, "Meetei_Mayek"),
    c(0xABD7, None, "MEETEI MAYEK LETTER DIL", 0x31, "Meetei_Mayek"),
    c(0xABD8, None, "MEETEI MAYEK LETTER GHOU", 0x31, "Meetei_Mayek"),
    c(0xABD9, None, "MEETEI MAYEK LETTER DHOU", 0x31, "Meetei_Mayek"),
    c(0xABDA, None, "MEETEI MAYEK LETTER BHAM", 0x31, "Meetei_Mayek"),
    c(0xABDB, None, "MEETEI MAYEK LETTER KOK LONSUM", 0x31, "Meetei_Mayek"),
    c(0xABDC, None, "MEETEI MAYEK LETTER LAI LONSUM", 0x31, "Meetei_Mayek"),
    c(0xABDD, None, "MEETEI MAYEK LETTER MIT LONSUM", 0x31, "Meetei_Mayek"),
    c(0xABDE, None, "MEETEI MAYEK LETTER PA LONSUM", 0x31, "Meetei_Mayek"),
    c(0xABDF, None, "MEETEI MAYEK LETTER NA LONSUM", 0x31, "Meetei_Mayek"),
    c(0xABE0, None, "MEETEI MAYEK LETTER TIL LONSUM", 0x31, "Meetei_Mayek"),
    c(0xABE1, None, "MEETEI MAYEK LETTER NGOU LONSUM", 0x31, "Meetei_Mayek"),
    c(0xABE2, None, "MEETEI MAYEK LETTER I LONSUM", 0x31, "Meetei_Mayek"),
    c(0xABE3, None, "MEETEI MAYEK VOWEL SIGN ONAP", 0x21, "Meetei_Mayek"),
    c(0xABE4, None, "MEETEI MAYEK VOWEL SIGN INAP", 0x21, "Meetei_Mayek"),
    c(0xABE5, None, "MEETEI MAYEK VOWEL SIGN ANAP", 0x21, "Meetei_Mayek"),
    c(0xABE6, None, "MEETEI MAYEK VOWEL SIGN YENAP", 0x21, "Meetei_Mayek"),
    c(0xABE7, None, "MEETEI MAYEK VOWEL SIGN SOUNAP", 0x21, "Meetei_Mayek"),
    c(0xABE8, None, "MEETEI MAYEK VOWEL SIGN UNAP", 0x21, "Meetei_Mayek"),
    c(0xABE9, None, "MEETEI MAYEK VOWEL SIGN CHEINAP", 0x21, "Meetei_Mayek"),
    c(0xABEA, None, "MEETEI MAYEK VOWEL SIGN NUNG", 0x21, "Meetei_Mayek"),
    c(0xABEB, None, "MEETEI MAYEK CHEIKHEI", 0x00, "Meetei_Mayek"),
    c(0xABEC, None, "MEETEI MAYEK LUM IYEK", 0x20, "Meetei_Mayek"),
    c(0xABED, None, "MEETEI MAYEK APUN IYEK", 0x20, "Meetei_Mayek"),
    c(0xABF0, None, "MEETEI MAYEK DIGIT ZERO", 0x20, "Meetei_Mayek"),
    c(0xABF1, None, "MEETEI MAYEK DIGIT ONE", 0x20, "Meetei_Mayek"),
    c(0xABF2, None, "MEETEI MAYEK DIGIT TWO", 0x20, "Meetei_Mayek"),
    c(0xABF3, None, "MEETEI MAYEK DIGIT THREE", 0x20, "Meetei_Mayek"),
    c(0xABF4, None, "MEETEI MAYEK DIGIT FOUR", 0x20, "Meetei_Mayek"),
    c(0xABF5, None, "MEETEI MAYEK DIGIT FIVE", 0x20, "Meetei_Mayek"),
    c(0xABF6, None, "MEETEI MAYEK DIGIT SIX", 0x20, "Meetei_Mayek"),
    c(0xABF7, None, "MEETEI MAYEK DIGIT SEVEN", 0x20, "Meetei_Mayek"),
    c(0xABF8, None, "MEETEI MAYEK DIGIT EIGHT", 0x20, "Meetei_Mayek"),
    c(0xABF9, None, "MEETEI MAYEK DIGIT NINE", 0x20, "Meetei_Mayek"),
    c(0xAC00, None, "HANGUL SYLLABLE GA", 0x31, "Hangul"),
    c(0xAC01, None, "HANGUL SYLLABLE GAG", 0x31, "Hangul"),
    c(0xAC02, None, "HANGUL SYLLABLE GAGG", 0x31, "Hangul"),
    c(0xAC03, None, "HANGUL SYLLABLE GAGS", 0x31, "Hangul"),
    c(0xAC04, None, "HANGUL SYLLABLE GAN", 0x31, "Hangul"),
    c(0xAC05, None, "HANGUL SYLLABLE GANJ", 0x31, "Hangul"),
    c(0xAC06, None, "HANGUL SYLLABLE GANH", 0x31, "Hangul"),
    c(0xAC07, None, "HANGUL SYLLABLE GAD", 0x31, "Hangul"),
    c(0xAC08, None, "HANGUL SYLLABLE GAL", 0x31, "Hangul"),
    c(0xAC09, None, "HANGUL SYLLABLE GALG", 0x31, "Hangul"),
    c(0xAC0A, None, "HANGUL SYLLABLE GALM", 0x31, "Hangul"),
    c(0xAC0B, None, "HANGUL SYLLABLE GALB", 0x31, "Hangul"),
    c(0xAC0C, None, "HANGUL SYLLABLE GALS", 0x31, "Hangul"),
    c(0xAC0D, None, "HANGUL SYLLABLE GALT", 0x31, "Hangul"),
    c(0xAC0E, None, "HANGUL SYLLABLE GALP", 0x31, "Hangul"),
    c(0xAC0F, None, "HANGUL SYLLABLE GALH", 0x31, "Hangul"),
    c(0xAC10, None, "HANGUL SYLLABLE GAM", 0x31, "Hangul"),
    c(0xAC11, None, "HANGUL SYLLABLE GAB", 0x31, "Hangul"),
    c(0xAC12, None, "HANGUL SYLLABLE GABS", 0x31, "Hangul"),
    c(0xAC13, None, "HANGUL SYLLABLE GAS", 0x31, "Hangul"),
    c(0xAC14, None, "HANGUL SYLLABLE GASS", 0x31, "Hangul"),
    c(0xAC15, None, "HANGUL SYLLABLE GANG", 0x31, "Hangul"),
    c(0xAC16, None, "HANGUL SYLLABLE GAJ", 0x31, "Hangul"),
    c(0xAC17, None, "HANGUL SYLLABLE GAC", 0x31, "Hangul"),
    c(0xAC18, None, "HANGUL SYLLABLE GAK", 0x31, "Hangul"),
    c(0xAC19, None, "HANGUL SYLLABLE GAT", 0x31, "Hangul"),
    c(0xAC1A, None, "HANGUL SYLLABLE GAP", 0x31, "Hangul"),
    c(0xAC1B, None, "HANGUL SYLLABLE GAH", 0x31, "Hangul"),
    c(0xAC1C, None, "HANGUL SYLLABLE GAE", 0x31, "Hangul"),
    c(0xAC1D, None, "HANGUL SYLLABLE GAEG", 0x31, "Hangul"),
    c(0xAC1E, None, "HANGUL SYLLABLE GAEGG", 0x31, "Hangul"),
    c(0xAC1F, None, "HANGUL SYLLABLE GAEGS", 0x31, "Hangul"),
    c(0xAC20, None, "HANGUL SYLLABLE GAEN", 0x31, "Hangul"),
    c(0xAC21, None, "HANGUL SYLLABLE GAENJ", 0x31, "Hangul"),
    c(0xAC22, None, "HANGUL SYLLABLE GAENH", 0x31, "Hangul"),
    c(0xAC23, None, "HANGUL SYLLABLE GAED", 0x31, "Hangul"),
    c(0xAC24, None, "HANGUL SYLLABLE GAEL", 0x31, "Hangul"),
    c(0xAC25, None, "HANGUL SYLLABLE GAELG", 0x31, "Hangul"),
    c(0xAC26, None, "HANGUL SYLLABLE GAELM", 0x31, "Hangul"),
    c(0xAC27, None, "HANGUL SYLLABLE GAELB", 0x31, "Hangul"),
    c(0xAC28, None, "HANGUL SYLLABLE GAELS", 0x31, "Hangul"),
    c(0xAC29, None, "HANGUL SYLLABLE GAELT", 0x31, "Hangul"),
    c(0xAC2A, None, "HANGUL SYLLABLE GAELP", 0x31, "Hangul"),
    c(0xAC2B, None, "HANGUL SYLLABLE GAELH", 0x31, "Hangul"),
    c(0xAC2C, None, "HANGUL SYLLABLE GAEM", 0x31, "Hangul"),
    c(0xAC2D, None, "HANGUL SYLLABLE GAEB", 0x31, "Hangul"),
    c(0xAC2E, None, "HANGUL SYLLABLE GAEBS", 0x31, "Hangul"),
    c(0xAC2F, None, "HANGUL SYLLABLE GAES", 0x31, "Hangul"),
    c(0xAC30, None, "HANGUL SYLLABLE GAESS", 0x31, "Hangul"),
    c(0xAC31, None, "HANGUL SYLLABLE GAENG", 0x31, "Hangul"),
    c(0xAC32, None, "HANGUL SYLLABLE GAEJ", 0x31, "Hangul"),
    c(0xAC33, None, "HANGUL SYLLABLE GAEC", 0x31, "Hangul"),
    c(0xAC34, None, "HANGUL SYLLABLE GAEK", 0x31, "Hangul"),
    c(0xAC35, None, "HANGUL SYLLABLE GAET", 0x31, "Hangul"),
    c(0xAC36, None, "HANGUL SYLLABLE GAEP", 0x31, "Hangul"),
    c(0xAC37, None, "HANGUL SYLLABLE GAEH", 0x31, "Hangul"),
    c(0xAC38, None, "HANGUL SYLLABLE GYA", 0x31, "Hangul"),
    c(0xAC39, None, "HANGUL SYLLABLE GYAG", 0x31, "Hangul"),
    c(0xAC3A, None, "HANGUL SYLLABLE GYAGG", 0x31, "Hangul"),
    c(0xAC3B, None, "HANGUL SYLLABLE GYAGS", 0x31, "Hangul"),
    c(0xAC3C, None, "HANGUL SYLLABLE GYAN", 0x31, "Hangul"),
    c(0xAC3D, None, "HANGUL SYLLABLE GYANJ", 0x31, "Hangul"),
    c(0xAC3E, None, "HANGUL SYLLABLE GYANH", 0x31, "Hangul"),
    c(0xAC3F, None, "HANGUL SYLLABLE GYAD", 0x31, "Hangul"),
    c(0xAC40, None, "HANGUL SYLLABLE GYAL", 0x31, "Hangul"),
    c(0xAC41, None, "HANGUL SYLLABLE GYALG", 0x31, "Hangul"),
    c(0xAC42, None, "HANGUL SYLLABLE GYALM", 0x31, "Hangul"),
    c(0xAC43, None, "HANGUL SYLLABLE GYALB", 0x31, "Hangul"),
    c(0xAC44, None, "HANGUL SYLLABLE GYALS", 0x31, "Hangul"),
    c(0xAC45, None, "HANGUL SYLLABLE GYALT", 0x31, "Hangul"),
    c(0xAC46, None, "HANGUL SYLLABLE GYALP", 0x31, "Hangul"),
    c(0xAC47, None, "HANGUL SYLLABLE GYALH", 0x31, "Hangul"),
    c(0xAC48, None, "HANGUL SYLLABLE GYAM", 0x31, "Hangul"),
    c(0xAC49, None, "HANGUL SYLLABLE GYAB", 0x31, "Hangul"),
    c(0xAC4A, None, "HANGUL SYLLABLE GYABS", 0x31, "Hangul"),
    c(0xAC4B, None, "HANGUL SYLLABLE GYAS", 0x31, "Hangul"),
    c(0xAC4C, None, "HANGUL SYLLABLE GYASS", 0x31, "Hangul"),
    c(0xAC4D, None, "HANGUL SYLLABLE GYANG", 0x31, "Hangul"),
    c(0xAC4E, None, "HANGUL SYLLABLE GYAJ", 0x31, "Hangul"),
    c(0xAC4F, None, "HANGUL SYLLABLE GYAC", 0x31, "Hangul"),
    c(0xAC50, None, "HANGUL SYLLABLE GYAK", 0x31, "Hangul"),
    c(0xAC51, None, "HANGUL SYLLABLE GYAT", 0x31, "Hangul"),
    c(0xAC52, None, "HANGUL SYLLABLE GYAP", 0x31, "Hangul"),
    c(0xAC53, None, "HANGUL SYLLABLE GYAH", 0x31, "Hangul"),
    c(0xAC54, None, "HANGUL SYLLABLE GYAE", 0x31, "Hangul"),
    c(0xAC55, None, "HANGUL SYLLABLE GYAEG", 0x31, "Hangul"),
    c(0xAC56, None, "HANGUL SYLLABLE GYAEGG", 0x31, "Hangul"),
    c(0xAC57, None, "HANGUL SYLLABLE GYAEGS", 0x31, "Hangul"),
    c(0xAC58, None, "HANGUL SYLLABLE GYAEN", 0x31, "Hangul"),
    c(0xAC59, None, "HANGUL SYLLABLE GYAENJ", 0x31, "Hangul"),
    c(0xAC5A, None, "HANGUL SYLLABLE GYAENH", 0x31, "Hangul"),
    c(0xAC5B, None, "HANGUL SYLLABLE GYAED", 0x31, "Hangul"),
    c(0xAC5C, None, "HANGUL SYLLABLE GYAEL", 0x31, "Hangul"),
    c(0xAC5D, None, "HANGUL SYLLABLE GYAELG", 0x31, "Hangul"),
    c(0xAC5E, None, "HANGUL SYLLABLE GYAELM", 0x31, "Hangul"),
    c(0xAC5F, None, "HANGUL SYLLABLE GYAELB", 0x31, "Hangul"),
    c(0xAC60, None, "HANGUL SYLLABLE GYAELS", 0x31, "Hangul"),
    c(0xAC61, None, "HANGUL SYLLABLE GYAELT", 0x31, "Hangul"),
    c(0xAC62, None, "HANGUL SYLLABLE GYAELP", 0x31, "Hangul"),
    c(0xAC63, None, "HANGUL SYLLABLE GYAELH", 0x31, "Hangul"),
    c(0xAC64, None, "HANGUL SYLLABLE GYAEM", 0x31, "Hangul"),
    c(0xAC65, None, "HANGUL SYLLABLE GYAEB", 0x31, "Hangul"),
    c(0xAC66, None, "HANGUL SYLLABLE GYAEBS", 0x31, "Hangul"),
    c(0xAC67, None, "HANGUL SYLLABLE GYAES", 0x31, "Hangul"),
    c(0xAC68, None, "HANGUL SYLLABLE GYAESS", 0x31, "Hangul"),
    c(0xAC69, None, "HANGUL SYLLABLE GYAENG", 0x31, "Hangul"),
    c(0xAC6A, None, "HANGUL SYLLABLE GYAEJ", 0x31, "Hangul"),
    c(0xAC6B, None, "HANGUL SYLLABLE GYAEC", 0x31, "Hangul"),
    c(0xAC6C, None, "HANGUL SYLLABLE GYAEK", 0x31, "Hangul"),
    c(0xAC6D, None, "HANGUL SYLLABLE GYAET", 0x31, "Hangul"),
    c(0xAC6E, None, "HANGUL SYLLABLE GYAEP", 0x31, "Hangul"),
    c(0xAC6F, None, "HANGUL SYLLABLE GYAEH", 0x31, "Hangul"),
    c(0xAC70, None, "HANGUL SYLLABLE GEO", 0x31, "Hangul"),
    c(0xAC71, None, "HANGUL SYLLABLE GEOG", 0x31, "Hangul"),
    c(0xAC72, None, "HANGUL SYLLABLE GEOGG", 0x31, "Hangul"),
    c(0xAC73, None, "HANGUL SYLLABLE GEOGS", 0x31, "Hangul"),
    c(0xAC74, None, "HANGUL SYLLABLE GEON", 0x31, "Hangul"),
    c(0xAC75, None, "HANGUL SYLLABLE GEONJ", 0x31, "Hangul"),
    c(0xAC76, None, "HANGUL SYLLABLE GEONH", 0x31, "Hangul"),
    c(0xAC77, None, "HANGUL SYLLABLE GEOD", 0x31, "Hangul"),
    c(0xAC78, None, "HANGUL SYLLABLE GEOL", 0x31, "Hangul"),
    c(0xAC79, None, "HANGUL SYLLABLE GEOLG", 0x31, "Hangul"),
    c(0xAC7A, None, "HANGUL SYLLABLE GEOLM", 0x31, "Hangul"),
    c(0xAC7B, None, "HANGUL SYLLABLE GEOLB", 0x31, "Hangul"),
    c(0xAC7C, None, "HANGUL SYLLABLE GEOLS", 0x31, "Hangul"),
    c(0xAC7D, None, "HANGUL SYLLABLE GEOLT", 0x31, "Hangul"),
    c(0xAC7E, None, "HANGUL SYLLABLE GEOLP", 0x31, "Hangul"),
    c(0xAC7F, None, "HANGUL SYLLABLE GEOLH", 0x31, "Hangul"),
    c(0xAC80, None, "HANGUL SYLLABLE GEOM", 0x31, "Hangul"),
    c(0xAC81, None, "HANGUL SYLLABLE GEOB", 0x31, "Hangul"),
    c(0xAC82, None, "HANGUL SYLLABLE GEOBS", 0x31, "Hangul"),
    c(0xAC83, None, "HANGUL SYLLABLE GEOS", 0x31, "Hangul"),
    c(0xAC84, None, "HANGUL SYLLABLE GEOSS", 0x31, "Hangul"),
    c(0xAC85, None, "HANGUL SYLLABLE GEONG", 0x31, "Hangul"),
    c(0xAC86, None, "HANGUL SYLLABLE GEOJ", 0x31, "Hangul"),
    c(0xAC87, None, "HANGUL SYLLABLE GEOC", 0x31, "Hangul"),
    c(0xAC88, None, "HANGUL SYLLABLE GEOK", 0x31, "Hangul"),
    c(0xAC89, None, "HANGUL SYLLABLE GEOT", 0x31, "Hangul"),
    c(0xAC8A, None, "HANGUL SYLLABLE GEOP", 0x31, "Hangul"),
    c(0xAC8B, None, "HANGUL SYLLABLE GEOH", 0x31, "Hangul"),
    c(0xAC8C, None, "HANGUL SYLLABLE GE", 0x31, "Hangul"),
    c(0xAC8D, None, "HANGUL SYLLABLE GEG", 0x31, "Hangul"),
    c(0xAC8E, None, "HANGUL SYLLABLE GEGG", 0x31, "Hangul"),
    c(0xAC8F, None, "HANGUL SYLLABLE GEGS", 0x31, "Hangul"),
    c(0xAC90, None, "HANGUL SYLLABLE GEN", 0x31, "Hangul"),
    c(0xAC91, None, "HANGUL SYLLABLE GENJ", 0x31, "Hangul"),
    c(0xAC92, None, "HANGUL SYLLABLE GENH", 0x31, "Hangul"),
    c(0xAC93, None, "HANGUL SYLLABLE GED", 0x31, "Hangul"),
    c(0xAC94, None, "HANGUL SYLLABLE GEL", 0x31, "Hangul"),
    c(0xAC95, None, "HANGUL SYLLABLE GELG", 0x31, "Hangul"),
    c(0xAC96, None, "HANGUL SYLLABLE GELM", 0x31, "Hangul"),
    c(0xAC97, None, "HANGUL SYLLABLE GELB", 0x31, "Hangul"),
    c(0xAC98, None, "HANGUL SYLLABLE GELS", 0x31, "Hangul"),
    c(0xAC99, None, "HANGUL SYLLABLE GELT", 0x31, "Hangul"),
    c(0xAC9A, None, "HANGUL SYLLABLE GELP", 0x31, "Hangul"),
    c(0xAC9B, None, "HANGUL SYLLABLE GELH", 0x31, "Hangul"),
    c(0xAC9C, None, "HANGUL SYLLABLE GEM", 0x31, "Hangul"),
    c(0xAC9D, None, "HANGUL SYLLABLE GEB", 0x31, "Hangul"),
    c(0xAC9E, None, "HANGUL SYLLABLE GEBS", 0x31, "Hangul"),
    c(0xAC9F, None, "HANGUL SYLLABLE GES", 0x31, "Hangul"),
    c(0xACA0, None, "HANGUL SYLLABLE GESS", 0x31, "Hangul"),
    c(0xACA1, None, "HANGUL SYLLABLE GENG", 0x31, "Hangul"),
    c(0xACA2, None, "HANGUL SYLLABLE GEJ", 0x31, "Hangul"),
    c(0xACA3, None, "HANGUL SYLLABLE GEC", 0x31, "Hangul"),
    c(0xACA4, None, "HANGUL SYLLABLE GEK", 0x31, "Hangul"),
    c(0xACA5, None, "HANGUL SYLLABLE GET", 0x31, "Hangul"),
    c(0xACA6, None, "HANGUL SYLLABLE GEP", 0x31, "Hangul"),
    c(0xACA7, None, "HANGUL SYLLABLE GEH", 0x31, "Hangul"),
    c(0xACA8, None, "HANGUL SYLLABLE GYEO", 0x31, "Hangul"),
    c(0xACA9, None, "HANGUL SYLLABLE GYEOG", 0x31, "Hangul"),
    c(0xACAA, None, "HANGUL SYLLABLE GYEOGG", 0x31, "Hangul"),
    c(0xACAB, None, "HANGUL SYLLABLE GYEOGS", 0x31, "Hangul"),
    c(0xACAC, None, "HANGUL SYLLABLE GYEON", 0x31, "Hangul"),
    c(0xACAD, None, "HANGUL SYLLABLE GYEONJ", 0x31, "Hangul"),
    c(0xACAE, None, "HANGUL SYLLABLE GYEONH", 0x31, "Hangul"),
    c(0xACAF, None, "HANGUL SYLLABLE GYEOD", 0x31, "Hangul"),
    c(0xACB0, None, "HANGUL SYLLABLE GYEOL", 0x31, "Hangul"),
    c(0xACB1, None, "HANGUL SYLLABLE GYEOLG", 0x31, "Hangul"),
    c(0xACB2, None, "HANGUL SYLLABLE GYEOLM", 0x31, "Hangul"),
    c(0xACB3, None, "HANGUL SYLLABLE GYEOLB", 0x31, "Hangul"),
    c(0xACB4, None, "HANGUL SYLLABLE GYEOLS", 0x31, "Hangul"),
    c(0xACB5, None, "HANGUL SYLLABLE GYEOLT", 0x31, "Hangul"),
    c(0xACB6, None, "HANGUL SYLLABLE GYEOLP", 0x31, "Hangul"),
    c(0xACB7, None, "HANGUL SYLLABLE GYEOLH", 0x31, "Hangul"),
    c(0xACB8, None, "HANGUL SYLLABLE GYEOM", 0x31, "Hangul"),
    c(0xACB9, None, "HANGUL SYLLABLE GYEOB", 0x31, "Hangul"),
    c(0xACBA, None, "HANGUL SYLLABLE GYEOBS", 0x31, "Hangul"),
    c(0xACBB, None, "HANGUL SYLLABLE GYEOS", 0x31, "Hangul"),
    c(0xACBC, None, "HANGUL SYLLABLE GYEOSS", 0x31, "Hangul"),
    c(0xACBD, None, "HANGUL SYLLABLE GYEONG", 0x31, "Hangul"),
    c(0xACBE, None, "HANGUL SYLLABLE GYEOJ", 0x31, "Hangul"),
    c(0xACBF, None, "HANGUL SYLLABLE GYEOC", 0x31, "Hangul"),
    c(0xACC0, None, "HANGUL SYLLABLE GYEOK", 0x31, "Hangul"),
    c(0xACC1, None, "HANGUL SYLLABLE GYEOT", 0x31, "Hangul"),
    c(0xACC2, None, "HANGUL SYLLABLE GYEOP", 0x31, "Hangul"),
    c(0xACC3, None, "HANGUL SYLLABLE GYEOH", 0x31, "Hangul"),
    c(0xACC4, None, "HANGUL SYLLABLE GYE", 0x31, "Hangul"),
    c(0xACC5, None, "HANGUL SYLLABLE GYEG", 0x31, "Hangul"),
    c(0xACC6, None, "HANGUL SYLLABLE GYEGG", 0x31, "Hangul"),
    c(0xACC7, None, "HANGUL SYLLABLE GYEGS", 0x31, "Hangul"),
    c(0xACC8, None, "HANGUL SYLLABLE GYEN", 0x31, "Hangul"),
    c(0xACC9, None, "HANGUL SYLLABLE GYENJ", 0x31, "Hangul"),
    c(0xACCA, None, "HANGUL SYLLABLE GYENH", 0x31, "Hangul"),
    c(0xACCB, None, "HANGUL SYLLABLE GYED", 0x31, "Hangul"),
    c(0xACCC, None, "HANGUL SYLLABLE GYEL", 0x31, "Hangul"),
    c(0xACCD, None, "HANGUL SYLLABLE GYELG", 0x31, "Hangul"),
    c(0xACCE, None, "HANGUL SYLLABLE GYELM", 0x31, "Hangul"),
    c(0xACCF, None, "HANGUL SYLLABLE GYELB", 0x31, "Hangul"),
    c(0xACD0, None, "HANGUL SYLLABLE GYELS", 0x31, "Hangul"),
    c(0xACD1, None, "HANGUL SYLLABLE GYELT", 0x31, "Hangul"),
    c(0xACD2, None, "HANGUL SYLLABLE GYELP", 0x31, "Hangul"),
    c(0xACD3, None, "HANGUL SYLLABLE GYELH", 0x31, "Hangul"),
    c(0xACD4, None, "HANGUL SYLLABLE GYEM", 0x31, "Hangul"),
    c(0xACD5, None, "HANGUL SYLLABLE GYEB", 0x31, "Hangul"),
    c(0xACD6, None, "HANGUL SYLLABLE GYEBS", 0x31, "Hangul"),
    c(0xACD7, None, "HANGUL SYLLABLE GYES", 0x31, "Hangul"),
    c(0xACD8, None, "HANGUL SYLLABLE GYESS", 0x31, "Hangul"),
    c(0xACD9, None, "HANGUL SYLLABLE GYENG", 0x31, "Hangul"),
    c(0xACDA, None, "HANGUL SYLLABLE GYEJ", 0x31, "Hangul"),
    c(0xACDB, None, "HANGUL SYLLABLE GYEC", 0x31, "Hangul"),
    c(0xACDC, None, "HANGUL SYLLABLE GYEK", 0x31, "Hangul"),
    c(0xACDD, None, "HANGUL SYLLABLE GYET", 0x31, "Hangul"),
    c(0xACDE, None, "HANGUL SYLLABLE GYEP", 0x31, "Hangul"),
    c(0xACDF, None, "HANGUL SYLLABLE GYEH", 0x31, "Hangul"),
    c(0xACE0, None, "HANGUL SYLLABLE GO", 0x31, "Hangul"),
    c(0xACE1, None, "HANGUL SYLLABLE GOG", 0x31, "Hangul"),
    c(0xACE2, None, "HANGUL SYLLABLE GOGG", 0x31, "Hangul"),
    c(0xACE3, None, "HANGUL SYLLABLE GOGS", 0x31, "Hangul"),
    c(0xACE4, None, "HANGUL SYLLABLE GON", 0x31, "Hangul"),
    c(0xACE5, None, "HANGUL SYLLABLE GONJ", 0x31, "Hangul"),
    c(0xACE6, None, "HANGUL SYLLABLE GONH", 0x31, "Hangul"),
    c(0xACE7, None, "HANGUL SYLLABLE GOD", 0x31, "Hangul"),
    c(0xACE8, None, "HANGUL SYLLABLE GOL", 0x31, "Hangul"),
    c(0xACE9, None, "HANGUL SYLLABLE GOLG", 0x31, "Hangul"),
    c(0xACEA, None, "HANGUL SYLLABLE GOLM", 0x31, "Hangul"),
    c(0xACEB, None, "HANGUL SYLLABLE GOLB", 0x31, "Hangul"),
    c(0xACEC, None, "HANGUL SYLLABLE GOLS", 0x31, "Hangul"),
    c(0xACED, None, "HANGUL SYLLABLE GOLT", 0x31, "Hangul"),
    c(0xACEE, None, "HANGUL SYLLABLE GOLP", 0x31, "Hangul"),
    c(0xACEF, None, "HANGUL SYLLABLE GOLH", 0x31, "Hangul"),
    c(0xACF0, None, "HANGUL SYLLABLE GOM", 0x31, "Hangul"),
    c(0xACF1, None, "HANGUL SYLLABLE GOB", 0x31, "Hangul"),
    c(0xACF2, None, "HANGUL SYLLABLE GOBS", 0x31, "Hangul"),
    c(0xACF3, None, "HANGUL SYLLABLE GOS", 0x31, "Hangul"),
    c(0xACF4, None, "HANGUL SYLLABLE GOSS", 0x31, "Hangul"),
    c(0xACF5, None, "HANGUL SYLLABLE GONG", 0x31, "Hangul"),
    c(0xACF6, None, "HANGUL SYLLABLE GOJ", 0x31, "Hangul"),
    c(0xACF7, None, "HANGUL SYLLABLE GOC", 0x31, "Hangul"),
    c(0xACF8, None, "HANGUL SYLLABLE GOK", 0x31, "Hangul"),
    c(0xACF9, None, "HANGUL SYLLABLE GOT", 0x31, "Hangul"),
    c(0xACFA, None, "HANGUL SYLLABLE GOP", 0x31, "Hangul"),
    c(0xACFB, None, "HANGUL SYLLABLE GOH", 0x31, "Hangul"),
    c(0xACFC, None, "HANGUL SYLLABLE GWA", 0x31, "Hangul"),
    c(0xACFD, None, "HANGUL SYLLABLE GWAG", 0x31, "Hangul"),
    c(0xACFE, None, "HANGUL SYLLABLE GWAGG", 0x31, "Hangul"),
    c(0xACFF, None, "HANGUL SYLLABLE GWAGS", 0x31, "Hangul"),
    c(0xAD00, None, "HANGUL SYLLABLE GWAN", 0x31, "Hangul"),
    c(0xAD01, None, "HANGUL SYLLABLE GWANJ", 0x31, "Hangul"),
    c(0xAD02, None, "HANGUL SYLLABLE GWANH", 0x31, "Hangul"),
    c(0xAD03, None, "HANGUL SYLLABLE GWAD", 0x31, "Hangul"),
    c(0xAD04, None, "HANGUL SYLLABLE GWAL", 0x31, "Hangul"),
    c(0xAD05, None, "HANGUL SYLLABLE GWALG", 0x31, "Hangul"),
    c(0xAD06, None, "HANGUL SYLLABLE GWALM", 0x31, "Hangul"),
    c(0xAD07, None, "HANGUL SYLLABLE GWALB", 0x31, "Hangul"),
    c(0xAD08, None, "HANGUL SYLLABLE GWALS", 0x31, "Hangul"),
    c(0xAD09, None, "HANGUL SYLLABLE GWALT", 0x31, "Hangul"),
    c(0xAD0A, None, "HANGUL SYLLABLE GWALP", 0x31, "Hangul"),
    c(0xAD0B, None, "HANGUL SYLLABLE GWALH", 0x31, "Hangul"),
    c(0xAD0C, None, "HANGUL SYLLABLE GWAM", 0x31, "Hangul"),
    c(0xAD0D, None, "HANGUL SYLLABLE GWAB", 0x31, "Hangul"),
    c(0xAD0E, None, "HANGUL SYLLABLE GWABS", 0x31, "Hangul"),
    c(0xAD0F, None, "HANGUL SYLLABLE GWAS", 0x31, "Hangul"),
    c(0xAD10, None, "HANGUL SYLLABLE GWASS", 0x31, "Hangul"),
    c(0xAD11, None, "HANGUL SYLLABLE GWANG", 0x31, "Hangul"),
    c(0xAD12, None, "HANGUL SYLLABLE GWAJ", 0x31, "Hangul"),
    c(0xAD13, None, "HANGUL SYLLABLE GWAC", 0x31, "Hangul"),
    c(0xAD14, None, "HANGUL SYLLABLE GWAK", 0x31, "Hangul"),
    c(0xAD15, None, "HANGUL SYLLABLE GWAT", 0x31, "Hangul"),
    c(0xAD16, None, "HANGUL SYLLABLE GWAP", 0x31, "Hangul"),
    c(0xAD17, None, "HANGUL SYLLABLE GWAH", 0x31, "Hangul"),
    c(0xAD18, None, "HANGUL SYLLABLE GWAE", 0x31, "Hangul"),
    c(0xAD19, None, "HANGUL SYLLABLE GWAEG", 0x31, "Hangul"),
    c(0xAD1A, None, "HANGUL SYLLABLE GWAEGG", 0x31, "Hangul"),
    c(0xAD1B, None, "HANGUL SYLLABLE GWAEGS", 0x31, "Hangul"),
    c(0xAD1C, None, "HANGUL SYLLABLE GWAEN", 0x31, "Hangul"),
    c(0xAD1D, None, "HANGUL SYLLABLE GWAENJ", 0x31, "Hangul"),
    c(0xAD1E, None, "HANGUL SYLLABLE GWAENH", 0x31, "Hangul"),
    c(0xAD1F, None, "HANGUL SYLLABLE GWAED", 0x31, "Hangul"),
    c(0xAD20, None, "HANGUL SYLLABLE GWAEL", 0x31, "Hangul"),
    c(0xAD21, None, "HANGUL SYLLABLE GWAELG", 0x31, "Hangul"),
    c(0xAD22, None, "HANGUL SYLLABLE GWAELM", 0x31, "Hangul"),
    c(0xAD23, None, "HANGUL SYLLABLE GWAELB", 0x31, "Hangul"),
    c(0xAD24, None, "HANGUL SYLLABLE GWAELS", 0x31, "Hangul"),
    c(0xAD25, None, "HANGUL SYLLABLE GWAELT", 0x31, "Hangul"),
    c(0xAD26, None, "HANGUL SYLLABLE GWAELP", 0x31, "Hangul"),
    c(0xAD27, None, "HANGUL SYLLABLE GWAELH", 0x31, "Hangul"),
    c(0xAD28, None, "HANGUL SYLLABLE GWAEM", 0x31, "Hangul"),
    c(0xAD29, None, "HANGUL SYLLABLE GWAEB", 0x31, "Hangul"),
    c(0xAD2A, None, "HANGUL SYLLABLE GWAEBS", 0x31, "Hangul"),
    c(0xAD2B, None, "HANGUL SYLLABLE GWAES", 0x31, "Hangul"),
    c(0xAD2C, None, "HANGUL SYLLABLE GWAESS", 0x31, "Hangul"),
    c(0xAD2D, None, "HANGUL SYLLABLE GWAENG", 0x31, "Hangul"),
    c(0xAD2E, None, "HANGUL SYLLABLE GWAEJ", 0x31, "Hangul"),
    c(0xAD2F, None, "HANGUL SYLLABLE GWAEC", 0x31, "Hangul"),
    c(0xAD30, None, "HANGUL SYLLABLE GWAEK", 0x31, "Hangul"),
    c(0xAD31, None, "HANGUL SYLLABLE GWAET", 0x31, "Hangul"),
    c(0xAD32, None, "HANGUL SYLLABLE GWAEP", 0x31, "Hangul"),
    c(0xAD33, None, "HANGUL SYLLABLE GWAEH", 0x31, "Hangul"),
    c(0xAD34, None, "HANGUL SYLLABLE GOE", 0x31, "Hangul"),
    c(0xAD35, None, "HANGUL SYLLABLE GOEG", 0x31, "Hangul"),
    c(0xAD36, None, "HANGUL SYLLABLE GOEGG", 0x31, "Hangul"),
    c(0xAD37, None, "HANGUL SYLLABLE GOEGS", 0x31, "Hangul"),
    c(0xAD38, None, "HANGUL SYLLABLE GOEN", 0x31, "Hangul"),
    c(0xAD39, None, "HANGUL SYLLABLE GOENJ", 0x31, "Hangul"),
    c(0xAD3A, None, "HANGUL SYLLABLE GOENH", 0x31, "Hangul"),
    c(0xAD3B, None, "HANGUL SYLLABLE GOED", 0x31, "Hangul"),
    c(0xAD3C, None, "HANGUL SYLLABLE GOEL", 0x31, "Hangul"),
    c(0xAD3D, None, "HANGUL SYLLABLE GOELG", 0x31, "Hangul"),
    c(0xAD3E, None, "HANGUL SYLLABLE GOELM", 0x31, "Hangul"),
    c(0xAD3F, None, "HANGUL SYLLABLE GOELB", 0x31, "Hangul"),
    c(0xAD40, None, "HANGUL SYLLABLE GOELS", 0x31, "Hangul"),
    c(0xAD41, None, "HANGUL SYLLABLE GOELT", 0x31, "Hangul"),
    c(0xAD42, None, "HANGUL SYLLABLE GOELP", 0x31, "Hangul"),
    c(0xAD43, None, "HANGUL SYLLABLE GOELH", 0x31, "Hangul"),
    c(0xAD44, None, "HANGUL SYLLABLE GOEM", 0x31, "Hangul"),
    c(0xAD45, None, "HANGUL SYLLABLE GOEB", 0x31, "Hangul"),
    c(0xAD46, None, "HANGUL SYLLABLE GOEBS", 0x31, "Hangul"),
    c(0xAD47, None, "HANGUL SYLLABLE GOES", 0x31, "Hangul"),
    c(0xAD48, None, "HANGUL SYLLABLE GOESS", 0x31, "Hangul"),
    c(0xAD49, None, "HANGUL SYLLABLE GOENG", 0x31, "Hangul"),
    c(0xAD4A, None, "HANGUL SYLLABLE GOEJ", 0x31, "Hangul"),
    c(0xAD4B, None, "HANGUL SYLLABLE GOEC", 0x31, "Hangul"),
    c(0xAD4C, None, "HANGUL SYLLABLE GOEK", 0x31, "Hangul"),
    c(0xAD4D, None, "HANGUL SYLLABLE GOET", 0x31, "Hangul"),
    c(0xAD4E, None, "HANGUL SYLLABLE GOEP", 0x31, "Hangul"),
    c(0xAD4F, None, "HANGUL SYLLABLE GOEH", 0x31, "Hangul"),
    c(0xAD50, None, "HANGUL SYLLABLE GYO", 0x31, "Hangul"),
    c(0xAD51, None, "HANGUL SYLLABLE GYOG", 0x31, "Hangul"),
    c(0xAD52, None, "HANGUL SYLLABLE GYOGG", 0x31, "Hangul"),
    c(0xAD53, None, "HANGUL SYLLABLE GYOGS", 0x31, "Hangul"),
    c(0xAD54, None, "HANGUL SYLLABLE GYON", 0x31, "Hangul"),
    c(0xAD55, None, "HANGUL SYLLABLE GYONJ", 0x31, "Hangul"),
    c(0xAD56, None, "HANGUL SYLLABLE GYONH", 0x31, "Hangul"),
    c(0xAD57, None, "HANGUL SYLLABLE GYOD", 0x31, "Hangul"),
    c(0xAD58, None, "HANGUL SYLLABLE GYOL", 0x31, "Hangul"),
    c(0xAD59, None, "HANGUL SYLLABLE GYOLG", 0x31, "Hangul"),
    c(0xAD5A, None, "HANGUL SYLLABLE GYOLM", 0x31, "Hangul"),
    c(0xAD5B, None, "HANGUL SYLLABLE GYOLB", 0x31, "Hangul"),
    c(0xAD5C, None, "HANGUL SYLLABLE GYOLS", 0x31, "Hangul"),
    c(0xAD5D, None, "HANGUL SYLLABLE GYOLT", 0x31, "Hangul"),
    c(0xAD5E, None, "HANGUL SYLLABLE GYOLP", 0x31, "Hangul"),
    c(0xAD5F, None, "HANGUL SYLLABLE GYOLH", 0x31, "Hangul"),
    c(0xAD60, None, "HANGUL SYLLABLE GYOM", 0x31, "Hangul"),
    c(0xAD61, None, "HANGUL SYLLABLE GYOB", 0x31, "Hangul"),
    c(0xAD62, None, "HANGUL SYLLABLE GYOBS", 0x31, "Hangul"),
    c(0xAD63, None, "HANGUL SYLLABLE GYOS", 0x31, "Hangul"),
    c(0xAD64, None, "HANGUL SYLLABLE GYOSS", 0x31, "Hangul"),
    c(0xAD65, None, "HANGUL SYLLABLE GYONG", 0x31, "Hangul"),
    c(0xAD66, None, "HANGUL SYLLABLE GYOJ", 0x31, "Hangul"),
    c(0xAD67, None, "HANGUL SYLLABLE GYOC", 0x31, "Hangul"),
    c(0xAD68, None, "HANGUL SYLLABLE GYOK", 0x31, "Hangul"),
    c(0xAD69, None, "HANGUL SYLLABLE GYOT", 0x31, "Hangul"),
    c(0xAD6A, None, "HANGUL SYLLABLE GYOP", 0x31, "Hangul"),
    c(0xAD6B, None, "HANGUL SYLLABLE GYOH", 0x31, "Hangul"),
    c(0xAD6C, None, "HANGUL SYLLABLE GU", 0x31, "Hangul"),
    c(0xAD6D, None, "HANGUL SYLLABLE GUG", 0x31, "Hangul"),
    c(0xAD6E, None, "HANGUL SYLLABLE GUGG", 0x31, "Hangul"),
    c(0xAD6F, None, "HANGUL SYLLABLE GUGS", 0x31, "Hangul"),
    c(0xAD70, None, "HANGUL SYLLABLE GUN", 0x31, "Hangul"),
    c(0xAD71, None, "HANGUL SYLLABLE GUNJ", 0x31, "Hangul"),
    c(0xAD72, None, "HANGUL SYLLABLE GUNH", 0x31, "Hangul"),
    c(0xAD73, None, "HANGUL SYLLABLE GUD", 0x31, "Hangul"),
    c(0xAD74, None, "HANGUL SYLLABLE GUL", 0x31, "Hangul"),
    c(0xAD75, None, "HANGUL SYLLABLE GULG", 0x31, "Hangul"),
    c(0xAD76, None, "HANGUL SYLLABLE GULM", 0x31, "Hangul"),
    c(0xAD77, None, "HANGUL SYLLABLE GULB", 0x31, "Hangul"),
    c(0xAD78, None, "HANGUL SYLLABLE GULS", 0x31, "Hangul"),
    c(0xAD79, None, "HANGUL SYLLABLE GULT", 0x31, "Hangul"),
    c(0xAD7A, None, "HANGUL SYLLABLE GULP", 0x31, "Hangul"),
    c(0xAD7B, None, "HANGUL SYLLABLE GULH", 0x31, "Hangul"),
    c(0xAD7C, None, "HANGUL SYLLABLE GUM", 0x31, "Hangul"),
    c(0xAD7D, None, "HANGUL SYLLABLE GUB", 0x31, "Hangul"),
    c(0xAD7E, None, "HANGUL SYLLABLE GUBS", 0x31, "Hangul"),
    c(0xAD7F, None, "HANGUL SYLLABLE GUS", 0x31, "Hangul"),
    c(0xAD80, None, "HANGUL SYLLABLE GUSS", 0x31, "Hangul"),
    c(0xAD81, None, "HANGUL SYLLABLE GUNG", 0x31, "Hangul"),
    c(0xAD82, None, "HANGUL SYLLABLE GUJ", 0x31, "Hangul"),
    c(0xAD83, None, "HANGUL SYLLABLE GUC", 0x31, "Hangul"),
    c(0xAD84, None, "HANGUL SYLLABLE GUK", 0x31, "Hangul"),
    c(0xAD85, None, "HANGUL SYLLABLE GUT", 0x31, "Hangul"),
    c(0xAD86, None, "HANGUL SYLLABLE GUP", 0x31, "Hangul"),
    c(0xAD87, None, "HANGUL SYLLABLE GUH", 0x31, "Hangul"),
    c(0xAD88, None, "HANGUL SYLLABLE GWEO", 0x31, "Hangul"),
    c(0xAD89, None, "HANGUL SYLLABLE GWEOG", 0x31, "Hangul"),
    c(0xAD8A, None, "HANGUL SYLLABLE GWEOGG", 0x31, "Hangul"),
    c(0xAD8B, None, "HANGUL SYLLABLE GWEOGS", 0x31, "Hangul"),
    c(0xAD8C, None, "HANGUL SYLLABLE GWEON", 0x31, "Hangul"),
    c(0xAD8D, None, "HANGUL SYLLABLE GWEONJ", 0x31, "Hangul"),
    c(0xAD8E, None, "HANGUL SYLLABLE GWEONH", 0x31, "Hangul"),
    c(0xAD8F, None, "HANGUL SYLLABLE GWEOD", 0x31, "Hangul"),
    c(0xAD90, None, "HANGUL SYLLABLE GWEOL", 0x31, "Hangul"),
    c(0xAD91, None, "HANGUL SYLLABLE GWEOLG", 0x31, "Hangul"),
    c(0xAD92, None, "HANGUL SYLLABLE GWEOLM", 0x31, "Hangul"),
    c(0xAD93, None, "HANGUL SYLLABLE GWEOLB", 0x31, "Hangul"),
    c(0xAD94, None, "HANGUL SYLLABLE GWEOLS", 0x31, "Hangul"),
    c(0xAD95, None, "HANGUL SYLLABLE GWEOLT", 0x31, "Hangul"),
    c(0xAD96, None, "HANGUL SYLLABLE GWEOLP", 0x31, "Hangul"),
    c(0xAD97, None, "HANGUL SYLLABLE GWEOLH", 0x31, "Hangul"),
    c(0xAD98, None, "HANGUL SYLLABLE GWEOM", 0x31, "Hangul"),
    c(0xAD99, None, "HANGUL SYLLABLE GWEOB", 0x31, "Hangul"),
    c(0xAD9A, None, "HANGUL SYLLABLE GWEOBS", 0x31, "Hangul"),
    c(0xAD9B, None, "HANGUL SYLLABLE GWEOS", 0x31, "Hangul"),
    c(0xAD9C, None, "HANGUL SYLLABLE GWEOSS", 0x31, "Hangul"),
    c(0xAD9D, None, "HANGUL SYLLABLE GWEONG", 0x31, "Hangul"),
    c(0xAD9E, None, "HANGUL SYLLABLE GWEOJ", 0x31, "Hangul"),
    c(0xAD9F, None, "HANGUL SYLLABLE GWEOC", 0x31, "Hangul"),
    c(0xADA0, None, "HANGUL SYLLABLE GWEOK", 0x31, "Hangul"),
    c(0xADA1, None, "HANGUL SYLLABLE GWEOT", 0x31, "Hangul"),
    c(0xADA2, None, "HANGUL SYLLABLE GWEOP", 0x31, "Hangul"),
    c(0xADA3, None, "HANGUL SYLLABLE GWEOH", 0x31, "Hangul"),
    c(0xADA4, None, "HANGUL SYLLABLE GWE", 0x31, "Hangul"),
    c(0xADA5, None, "HANGUL SYLLABLE GWEG", 0x31, "Hangul"),
    c(0xADA6, None, "HANGUL SYLLABLE GWEGG", 0x31, "Hangul"),
    c(0xADA7, None, "HANGUL SYLLABLE GWEGS", 0x31, "Hangul"),
    c(0xADA8, None, "HANGUL SYLLABLE GWEN", 0x31, "Hangul"),
    c(0xADA9, None, "HANGUL SYLLABLE GWENJ", 0x31, "Hangul"),
    c(0xADAA, None, "HANGUL SYLLABLE GWENH", 0x31, "Hangul"),
    c(0xADAB, None, "HANGUL SYLLABLE GWED", 0x31, "Hangul"),
    c(0xADAC, None, "HANGUL SYLLABLE GWEL", 0x31, "Hangul"),
    c(0xADAD, None, "HANGUL SYLLABLE GWELG", 0x31, "Hangul"),
    c(0xADAE, None, "HANGUL SYLLABLE GWELM", 0x31, "Hangul"),
    c(0xADAF, None, "HANGUL SYLLABLE GWELB", 0x31, "Hangul"),
    c(0xADB0, None, "HANGUL SYLLABLE GWELS", 0x31, "Hangul"),
    c(0xADB1, None, "HANGUL SYLLABLE GWELT", 0x31, "Hangul"),
    c(0xADB2, None, "HANGUL SYLLABLE GWELP", 0x31, "Hangul"),
    c(0xADB3, None, "HANGUL SYLLABLE GWELH", 0x31, "Hangul"),
    c(0xADB4, None, "HANGUL SYLLABLE GWEM", 0x31, "Hangul"),
    c(0xADB5, None, "HANGUL SYLLABLE GWEB", 0x31, "Hangul"),
    c(0xADB6, None, "HANGUL SYLLABLE GWEBS", 0x31, "Hangul"),
    c(0xADB7, None, "HANGUL SYLLABLE GWES", 0x31, "Hangul"),
    c(0xADB8, None, "HANGUL SYLLABLE GWESS", 0x31, "Hangul"),
    c(0xADB9, None, "HANGUL SYLLABLE GWENG", 0x31, "Hangul"),
    c(0xADBA, None, "HANGUL SYLLABLE GWEJ", 0x31, "Hangul"),
    c(0xADBB, None, "HANGUL SYLLABLE GWEC", 0x31, "Hangul"),
    c(0xADBC, None, "HANGUL SYLLABLE GWEK", 0x31, "Hangul"),
    c(0xADBD, None, "HANGUL SYLLABLE GWET", 0x31, "Hangul"),
    c(0xADBE, None, "HANGUL SYLLABLE GWEP", 0x31, "Hangul"),
    c(0xADBF, None, "HANGUL SYLLABLE GWEH", 0x31, "Hangul"),
    c(0xADC0, None, "HANGUL SYLLABLE GWI", 0x31, "Hangul"),
    c(0xADC1, None, "HANGUL SYLLABLE GWIG", 0x31, "Hangul"),
    c(0xADC2, None, "HANGUL SYLLABLE GWIGG", 0x31, "Hangul"),
    c(0xADC3, None, "HANGUL SYLLABLE GWIGS", 0x31, "Hangul"),
    c(0xADC4, None, "HANGUL SYLLABLE GWIN", 0x31, "Hangul"),
    c(0xADC5, None, "HANGUL SYLLABLE GWINJ", 0x31, "Hangul"),
    c(0xADC6, None, "HANGUL SYLLABLE GWINH", 0x31, "Hangul"),
    c(0xADC7, None, "HANGUL SYLLABLE GWID", 0x31, "Hangul"),
    c(0xADC8, None, "HANGUL SYLLABLE GWIL", 0x31, "Hangul"),
    c(0xADC9, None, "HANGUL SYLLABLE GWILG", 0x31, "Hangul"),
    c(0xADCA, None, "HANGUL SYLLABLE GWILM", 0x31, "Hangul"),
    c(0xADCB, None, "HANGUL SYLLABLE GWILB", 0x31, "Hangul"),
    c(0xADCC, None, "HANGUL SYLLABLE GWILS", 0x31, "Hangul"),
    c(0xADCD, None, "HANGUL SYLLABLE GWILT", 0x31, "Hangul"),
    c(0xADCE, None, "HANGUL SYLLABLE GWILP", 0x31, "Hangul"),
    c(0xADCF, None, "HANGUL SYLLABLE GWILH", 0x31, "Hangul"),
    c(0xADD0, None, "HANGUL SYLLABLE GWIM", 0x31, "Hangul"),
    c(0xADD1, None, "HANGUL SYLLABLE GWIB", 0x31, "Hangul"),
    c(0xADD2, None, "HANGUL SYLLABLE GWIBS", 0x31, "Hangul"),
    c(0xADD3, None, "HANGUL SYLLABLE GWIS", 0x31, "Hangul"),
    c(0xADD4, None, "HANGUL SYLLABLE GWISS", 0x31, "Hangul"),
    c(0xADD5, None, "HANGUL SYLLABLE GWING", 0x31, "Hangul"),
    c(0xADD6, None, "HANGUL SYLLABLE GWIJ", 0x31, "Hangul"),
    c(0xADD7, None, "HANGUL SYLLABLE GWIC", 0x31, "Hangul"),
    c(0xADD8, None, "HANGUL SYLLABLE GWIK", 0x31, "Hangul"),
    c(0xADD9, None, "HANGUL SYLLABLE GWIT", 0x31, "Hangul"),
    c(0xADDA, None, "HANGUL SYLLABLE GWIP", 0x31, "Hangul"),
    c(0xADDB, None, "HANGUL SYLLABLE GWIH", 0x31, "Hangul"),
    c(0xADDC, None, "HANGUL SYLLABLE GYU", 0x31, "Hangul"),
    c(0xADDD, None, "HANGUL SYLLABLE GYUG", 0x31, "Hangul"),
    c(0xADDE, None, "HANGUL SYLLABLE GYUGG", 0x31, "Hangul"),
    c(0xADDF, None, "HANGUL SYLLABLE GYUGS", 0x31, "Hangul"),
    c(0xADE0, None, "HANGUL SYLLABLE GYUN", 0x31, "Hangul"),
    c(0xADE1, None, "HANGUL SYLLABLE GYUNJ", 0x31, "Hangul"),
    c(0xADE2, None, "HANGUL SYLLABLE GYUNH", 0x31, "Hangul"),
    c(0xADE3, None, "HANGUL SYLLABLE GYUD", 0x31, "Hangul"),
    c(0xADE4, None, "HANGUL SYLLABLE GYUL", 0x31, "Hangul"),
    c(0xADE5, None, "HANGUL SYLLABLE GYULG", 0x31, "Hangul"),
    c(0xADE6, None, "HANGUL SYLLABLE GYULM", 0x31, "Hangul"),
    c(0xADE7, None, "HANGUL SYLLABLE GYULB", 0x31, "Hangul"),
    c(0xADE8, None, "HANGUL SYLLABLE GYULS", 0x31, "Hangul"),
    c(0xADE9, None, "HANGUL SYLLABLE GYULT", 0x31, "Hangul"),
    c(0xADEA, None, "HANGUL SYLLABLE GYULP", 0x31, "Hangul"),
    c(0xADEB, None, "HANGUL SYLLABLE GYULH", 0x31, "Hangul"),
    c(0xADEC, None, "HANGUL SYLLABLE GYUM", 0x31, "Hangul"),
    c(0xADED, None, "HANGUL SYLLABLE GYUB", 0x31, "Hangul"),
    c(0xADEE, None, "HANGUL SYLLABLE GYUBS", 0x31, "Hangul"),
    c(0xADEF, None, "HANGUL SYLLABLE GYUS", 0x31, "Hangul"),
    c(0xADF0, None, "HANGUL SYLLABLE GYUSS", 0x31, "Hangul"),
    c(0xADF1, None, "HANGUL SYLLABLE GYUNG", 0x31, "Hangul"),
    c(0xADF2, None, "HANGUL SYLLABLE GYUJ", 0x31, "Hangul"),
    c(0xADF3, None, "HANGUL SYLLABLE GYUC", 0x31, "Hangul"),
    c(0xADF4, None, "HANGUL SYLLABLE GYUK", 0x31, "Hangul"),
    c(0xADF5, None, "HANGUL SYLLABLE GYUT", 0x31, "Hangul"),
    c(0xADF6, None, "HANGUL SYLLABLE GYUP", 0x31, "Hangul"),
    c(0xADF7, None, "HANGUL SYLLABLE GYUH", 0x31, "Hangul"),
    c(0xADF8, None, "HANGUL SYLLABLE GEU", 0x31, "Hangul"),
    c(0xADF9, None, "HANGUL SYLLABLE GEUG", 0x31, "Hangul"),
    c(0xADFA, None, "HANGUL SYLLABLE GEUGG", 0x31, "Hangul"),
    c(0xADFB, None, "HANGUL SYLLABLE GEUGS", 0x31, "Hangul"),
    c(0xADFC, None, "HANGUL SYLLABLE GEUN", 0x31, "Hangul"),
    c(0xADFD, None, "HANGUL SYLLABLE GEUNJ", 0x31, "Hangul"),
    c(0xADFE, None, "HANGUL SYLLABLE GEUNH", 0x31, "Hangul"),
    c(0xADFF, None, "HANGUL SYLLABLE GEUD", 0x31, "Hangul"),
    c(0xAE00, None, "HANGUL SYLLABLE GEUL", 0x31, "Hangul"),
    c(0xAE01, None, "HANGUL SYLLABLE GEULG", 0x31, "Hangul"),
    c(0xAE02, None, "HANGUL SYLLABLE GEULM", 0x31, "Hangul"),
    c(0xAE03, None, "HANGUL SYLLABLE GEULB", 0x31, "Hangul"),
    c(0xAE04, None, "HANGUL SYLLABLE GEULS", 0x31, "Hangul"),
    c(0xAE05, None, "HANGUL SYLLABLE GEULT", 0x31, "Hangul"),
    c(0xAE06, None, "HANGUL SYLLABLE GEULP", 0x31, "Hangul"),
    c(0xAE07, None, "HANGUL SYLLABLE GEULH", 0x31, "Hangul"),
    c(0xAE08, None, "HANGUL SYLLABLE GEUM", 0x31, "Hangul"),
    c(0xAE09, None, "HANGUL SYLLABLE GEUB", 0x31, "Hangul"),
    c(0xAE0A, None, "HANGUL SYLLABLE GEUBS", 0x31, "Hangul"),
    c(0xAE0B, None, "HANGUL SYLLABLE GEUS", 0x31, "Hangul"),
    c(0xAE0C, None, "HANGUL SYLLABLE GEUSS", 0x31, "Hangul"),
    c(0xAE0D, None, "HANGUL SYLLABLE GEUNG", 0x31, "Hangul"),
    c(0xAE0E, None, "HANGUL SYLLABLE GEUJ", 0x31, "Hangul"),
    c(0xAE0F, None, "HANGUL SYLLABLE GEUC", 0x31, "Hangul"),
    c(0xAE10, None, "HANGUL SYLLABLE GEUK", 0x31, "Hangul"),
    c(0xAE11, None, "HANGUL SYLLABLE GEUT", 0x31, "Hangul"),
    c(0xAE12, None, "HANGUL SYLLABLE GEUP", 0x31, "Hangul"),
    c(0xAE13, None, "HANGUL SYLLABLE GEUH", 0x31, "Hangul"),
    c(0xAE14, None, "HANGUL SYLLABLE GYI", 0x31, "Hangul"),
    c(0xAE15, None, "HANGUL SYLLABLE GYIG", 0x31, "Hangul"),
    c(0xAE16, None, "HANGUL SYLLABLE GYIGG", 0x31, "Hangul"),
    c(0xAE17, None, "HANGUL SYLLABLE GYIGS", 0x31, "Hangul"),
    c(0xAE18, None, "HANGUL SYLLABLE GYIN", 0x31, "Hangul"),
    c(0xAE19, None, "HANGUL SYLLABLE GYINJ", 0x31, "Hangul"),
    c(0xAE1A, None, "HANGUL SYLLABLE GYINH", 0x31, "Hangul"),
    c(0xAE1B, None, "HANGUL SYLLABLE GYID", 0x31, "Hangul"),
    c(0xAE1C, None, "HANGUL SYLLABLE GYIL", 0x31, "Hangul"),
    c(0xAE1D, None, "HANGUL SYLLABLE GYILG", 0x31, "Hangul"),
    c(0xAE1E, None, "HANGUL SYLLABLE GYILM", 0x31, "Hangul"),
    c(0xAE1F, None, "HANGUL SYLLABLE GYILB", 0x31, "Hangul"),
    c(0xAE20, None, "HANGUL SYLLABLE GYILS", 0x31, "Hangul"),
    c(0xAE21, None, "HANGUL SYLLABLE GYILT", 0x31, "Hangul"),
    c(0xAE22, None, "HANGUL SYLLABLE GYILP", 0x31, "Hangul"),
    c(0xAE23, None, "HANGUL SYLLABLE GYILH", 0x31, "Hangul"),
    c(0xAE24, None, "HANGUL SYLLABLE GYIM", 0x31, "Hangul"),
    c(0xAE25, None, "HANGUL SYLLABLE GYIB", 0x31, "Hangul"),
    c(0xAE26, None, "HANGUL SYLLABLE GYIBS", 0x31, "Hangul"),
    c(0xAE27, None, "HANGUL SYLLABLE GYIS", 0x31, "Hangul"),
    c(0xAE28, None, "HANGUL SYLLABLE GYISS", 0x31, "Hangul"),
    c(0xAE29, None, "HANGUL SYLLABLE GYING", 0x31, "Hangul"),
    c(0xAE2A, None, "HANGUL SYLLABLE GYIJ", 0x31, "Hangul"),
    c(0xAE2B, None, "HANGUL SYLLABLE GYIC", 0x31, "Hangul"),
    c(0xAE2C, None, "HANGUL SYLLABLE GYIK", 0x31, "Hangul"),
    c(0xAE2D, None, "HANGUL SYLLABLE GYIT", 0x31, "Hangul"),
    c(0xAE2E, None, "HANGUL SYLLABLE GYIP", 0x31, "Hangul"),
    c(0xAE2F, None, "HANGUL SYLLABLE GYIH", 0x31, "Hangul"),
    c(0xAE30, None, "HANGUL SYLLABLE GI", 0x31, "Hangul"),
    c(0xAE31, None, "HANGUL SYLLABLE GIG", 0x31, "Hangul"),
    c(0xAE32, None, "HANGUL SYLLABLE GIGG", 0x31, "Hangul"),
    c(0xAE33, None, "HANGUL SYLLABLE GIGS", 0x31, "Hangul"),
    c(0xAE34, None, "HANGUL SYLLABLE GIN", 0x31, "Hangul"),
    c(0xAE35, None, "HANGUL SYLLABLE GINJ", 0x31, "Hangul"),
    c(0xAE36, None, "HANGUL SYLLABLE GINH", 0x31, "Hangul"),
    c(0xAE37, None, "HANGUL SYLLABLE GID", 0x31, "Hangul"),
    c(0xAE38, None, "HANGUL SYLLABLE GIL", 0x31, "Hangul"),
    c(0xAE39, None, "HANGUL SYLLABLE GILG", 0x31, "Hangul"),
    c(0xAE3A, None, "HANGUL SYLLABLE GILM", 0x31, "Hangul"),
    c(0xAE3B, None, "HANGUL SYLLABLE GILB", 0x31, "Hangul"),
    c(0xAE3C, None, "HANGUL SYLLABLE GILS", 0x31, "Hangul"),
    c(0xAE3D, None, "HANGUL SYLLABLE GILT", 0x31, "Hangul"),
    c(0xAE3E, None, "HANGUL SYLLABLE GILP", 0x31, "Hangul"),
    c(0xAE3F, None, "HANGUL SYLLABLE GILH", 0x31, "Hangul"),
    c(0xAE40, None, "HANGUL SYLLABLE GIM", 0x31, "Hangul"),
    c(0xAE41, None, "HANGUL SYLLABLE GIB", 0x31, "Hangul"),
    c(0xAE42, None, "HANGUL SYLLABLE GIBS", 0x31, "Hangul"),
    c(0xAE43, None, "HANGUL SYLLABLE GIS", 0x31, "Hangul"),
    c(0xAE44, None, "HANGUL SYLLABLE GISS", 0x31, "Hangul"),
    c(0xAE45, None, "HANGUL SYLLABLE GING", 0x31, "Hangul"),
    c(0xAE46, None, "HANGUL SYLLABLE GIJ", 0x31, "Hangul"),
    c(0xAE47, None, "HANGUL SYLLABLE GIC", 0x31, "Hangul"),
    c(0xAE48, None, "HANGUL SYLLABLE GIK", 0x31, "Hangul"),
    c(0xAE49, None, "HANGUL SYLLABLE GIT", 0x31, "Hangul"),
    c(0xAE4A, None, "HANGUL SYLLABLE GIP", 0x31, "Hangul"),
    c(0xAE4B, None, "HANGUL SYLLABLE GIH", 0x31, "Hangul"),
    c(0xAE4C, None, "HANGUL SYLLABLE GGA", 0x31, "Hangul"),
    c(0xAE4D, None, "HANGUL SYLLABLE GGAG", 0x31, "Hangul"),
    c(0xAE4E, None, "HANGUL SYLLABLE GGAGG", 0x31, "Hangul"),
    c(0xAE4F, None, "HANGUL SYLLABLE GGAGS", 0x31, "Hangul"),
    c(0xAE50, None, "HANGUL SYLLABLE GGAN", 0x31, "Hangul"),
    c(0xAE51, None, "HANGUL SYLLABLE GGANJ", 0x31, "Hangul"),
    c(0xAE52, None, "HANGUL SYLLABLE GGANH", 0x31, "Hangul"),
    c(0xAE53, None, "HANGUL SYLLABLE GGAD", 0x31, "Hangul"),
    c(0xAE54, None, "HANGUL SYLLABLE GGAL", 0x31, "Hangul"),
    c(0xAE55, None, "HANGUL SYLLABLE GGALG", 0x31, "Hangul"),
    c(0xAE56, None, "HANGUL SYLLABLE GGALM", 0x31, "Hangul"),
    c(0xAE57, None, "HANGUL SYLLABLE GGALB", 0x31, "Hangul"),
    c(0xAE58, None, "HANGUL SYLLABLE GGALS", 0x31, "Hangul"),
    c(0xAE59, None, "HANGUL SYLLABLE GGALT", 0x31, "Hangul"),
    c(0xAE5A, None, "HANGUL SYLLABLE GGALP", 0x31, "Hangul"),
    c(0xAE5B, None, "HANGUL SYLLABLE GGALH", 0x31, "Hangul"),
    c(0xAE5C, None, "HANGUL SYLLABLE GGAM", 0x31, "Hangul"),
    c(0xAE5D, None, "HANGUL SYLLABLE GGAB", 0x31, "Hangul"),
    c(0xAE5E, None, "HANGUL SYLLABLE GGABS", 0x31, "Hangul"),
    c(0xAE5F, None, "HANGUL SYLLABLE GGAS", 0x31, "Hangul"),
    c(0xAE60, None, "HANGUL SYLLABLE GGASS", 0x31, "Hangul"),
    c(0xAE61, None, "HANGUL SYLLABLE GGANG", 0x31, "Hangul"),
    c(0xAE62, None, "HANGUL SYLLABLE GGAJ", 0x31, "Hangul"),
    c(0xAE63, None, "HANGUL SYLLABLE GGAC", 0x31, "Hangul"),
    c(0xAE64, None, "HANGUL SYLLABLE GGAK", 0x31, "Hangul"),
    c(0xAE65, None, "HANGUL SYLLABLE GGAT", 0x31, "Hangul"),
    c(0xAE66, None, "HANGUL SYLLABLE GGAP", 0x31, "Hangul"),
    c(0xAE67, None, "HANGUL SYLLABLE GGAH", 0x31, "Hangul"),
    c(0xAE68, None, "HANGUL SYLLABLE GGAE", 0x31, "Hangul"),
    c(0xAE69, None, "HANGUL SYLLABLE GGAEG", 0x31, "Hangul"),
    c(0xAE6A, None, "HANGUL SYLLABLE GGAEGG", 0x31, "Hangul"),
    c(0xAE6B, None, "HANGUL SYLLABLE GGAEGS", 0x31, "Hangul"),
    c(0xAE6C, None, "HANGUL SYLLABLE GGAEN", 0x31, "Hangul"),
    c(0xAE6D, None, "HANGUL SYLLABLE GGAENJ", 0x31, "Hangul"),
    c(0xAE6E, None, "HANGUL SYLLABLE GGAENH", 0x31, "Hangul"),
    c(0xAE6F, None, "HANGUL SYLLABLE GGAED", 0x31, "Hangul"),
    c(0xAE70, None, "HANGUL SYLLABLE GGAEL", 0x31, "Hangul"),
    c(0xAE71, None, "HANGUL SYLLABLE GGAELG", 0x31, "Hangul"),
    c(0xAE72, None, "HANGUL SYLLABLE GGAELM", 0x31, "Hangul"),
    c(0xAE73, None, "HANGUL SYLLABLE GGAELB", 0x31, "Hangul"),
    c(0xAE74, None, "HANGUL SYLLABLE GGAELS", 0x31, "Hangul"),
    c(0xAE75, None, "HANGUL SYLLABLE GGAELT", 0x31, "Hangul"),
    c(0xAE76, None, "HANGUL SYLLABLE GGAELP", 0x31, "Hangul"),
    c(0xAE77, None, "HANGUL SYLLABLE GGAELH", 0x31, "Hangul"),
    c(0xAE78, None, "HANGUL SYLLABLE GGAEM", 0x31, "Hangul"),
    c(0xAE79, None, "HANGUL SYLLABLE GGAEB", 0x31, "Hangul"),
    c(0xAE7A, None, "HANGUL SYLLABLE GGAEBS", 0x31, "Hangul"),
    c(0xAE7B, None, "HANGUL SYLLABLE GGAES", 0x31, "Hangul"),
    c(0xAE7C, None, "HANGUL SYLLABLE GGAESS", 0x31, "Hangul"),
    c(0xAE7D, None, "HANGUL SYLLABLE GGAENG", 0x31, "Hangul"),
    c(0xAE7E, None, "HANGUL SYLLABLE GGAEJ", 0x31, "Hangul"),
    c(0xAE7F, None, "HANGUL SYLLABLE GGAEC", 0x31, "Hangul"),
    c(0xAE80, None, "HANGUL SYLLABLE GGAEK", 0x31, "Hangul"),
    c(0xAE81, None, "HANGUL SYLLABLE GGAET", 0x31, "Hangul"),
    c(0xAE82, None, "HANGUL SYLLABLE GGAEP", 0x31, "Hangul"),
    c(0xAE83, None, "HANGUL SYLLABLE GGAEH", 0x31, "Hangul"),
    c(0xAE84, None, "HANGUL SYLLABLE GGYA", 0x31, "Hangul"),
    c(0xAE85, None, "HANGUL SYLLABLE GGYAG", 0x31, "Hangul"),
    c(0xAE86, None, "HANGUL SYLLABLE GGYAGG", 0x31, "Hangul"),
    c(0xAE87, None, "HANGUL SYLLABLE GGYAGS", 0x31, "Hangul"),
    c(0xAE88, None, "HANGUL SYLLABLE GGYAN", 0x31, "Hangul"),
    c(0xAE89, None, "HANGUL SYLLABLE GGYANJ", 0x31, "Hangul"),
    c(0xAE8A, None, "HANGUL SYLLABLE GGYANH", 0x31, "Hangul"),
    c(0xAE8B, None, "HANGUL SYLLABLE GGYAD", 0x31, "Hangul"),
    c(0xAE8C, None, "HANGUL SYLLABLE GGYAL", 0x31, "Hangul"),
    c(0xAE8D, None, "HANGUL SYLLABLE GGYALG", 0x31, "Hangul"),
    c(0xAE8E, None, "HANGUL SYLLABLE GGYALM", 0x31, "Hangul"),
    c(0xAE8F, None, "HANGUL SYLLABLE GGYALB", 0x31, "Hangul"),
    c(0xAE90, None, "HANGUL SYLLABLE GGYALS", 0x31, "Hangul"),
    c(0xAE91, None, "HANGUL SYLLABLE GGYALT", 0x31, "Hangul"),
    c(0xAE92, None, "HANGUL SYLLABLE GGYALP", 0x31, "Hangul"),
    c(0xAE93, None, "HANGUL SYLLABLE GGYALH", 0x31, "Hangul"),
    c(0xAE94, None, "HANGUL SYLLABLE GGYAM", 0x31, "Hangul"),
    c(0xAE95, None, "HANGUL SYLLABLE GGYAB", 0x31, "Hangul"),
    c(0xAE96, None, "HANGUL SYLLABLE GGYABS", 0x31, "Hangul"),
    c(0xAE97, None, "HANGUL SYLLABLE GGYAS", 0x31, "Hangul"),
    c(0xAE98, None, "HANGUL SYLLABLE GGYASS", 0x31, "Hangul"),
    c(0xAE99, None, "HANGUL SYLLABLE GGYANG", 0x31, "Hangul"),
    c(0xAE9A, None, "HANGUL SYLLABLE GGYAJ", 0x31, "Hangul"),
    c(0xAE9B, None, "HANGUL SYLLABLE GGYAC", 0x31, "Hangul"),
    c(0xAE9C, None, "HANGUL SYLLABLE GGYAK", 0x31, "Hangul"),
    c(0xAE9D, None, "HANGUL SYLLABLE GGYAT", 0x31, "Hangul"),
    c(0xAE9E, None, "HANGUL SYLLABLE GGYAP", 0x31, "Hangul"),
    c(0xAE9F, None, "HANGUL SYLLABLE GGYAH", 0x31, "Hangul"),
    c(0xAEA0, None, "HANGUL SYLLABLE GGYAE", 0x31, "Hangul"),
    c(0xAEA1, None, "HANGUL SYLLABLE GGYAEG", 0x31, "Hangul"),
    c(0xAEA2, None, "HANGUL SYLLABLE GGYAEGG", 0x31, "Hangul"),
    c(0xAEA3, None, "HANGUL SYLLABLE GGYAEGS", 0x31, "Hangul"),
    c(0xAEA4, None, "HANGUL SYLLABLE GGYAEN", 0x31, "Hangul"),
    c(0xAEA5, None, "HANGUL SYLLABLE GGYAENJ", 0x31, "Hangul"),
    c(0xAEA6, None, "HANGUL SYLLABLE GGYAENH", 0x31, "Hangul"),
    c(0xAEA7, None, "HANGUL SYLLABLE GGYAED", 0x31, "Hangul"),
    c(0xAEA8, None, "HANGUL SYLLABLE GGYAEL", 0x31, "Hangul"),
    c(0xAEA9, None, "HANGUL SYLLABLE GGYAELG", 0x31, "Hangul"),
    c(0xAEAA, None, "HANGUL SYLLABLE GGYAELM", 0x31, "Hangul"),
    c(0xAEAB, None, "HANGUL SYLLABLE GGYAELB", 0x31, "Hangul"),
    c(0xAEAC, None, "HANGUL SYLLABLE GGYAELS", 0x31, "Hangul"),
    c(0xAEAD, None, "HANGUL SYLLABLE GGYAELT", 0x31, "Hangul"),
    c(0xAEAE, None, "HANGUL SYLLABLE GGYAELP", 0x31, "Hangul"),
    c(0xAEAF, None, "HANGUL SYLLABLE GGYAELH", 0x31, "Hangul"),
    c(0xAEB0, None, "HANGUL SYLLABLE GGYAEM", 0x31, "Hangul"),
    c(0xAEB1, None, "HANGUL SYLLABLE GGYAEB", 0x31, "Hangul"),
    c(0xAEB2, None, "HANGUL SYLLABLE GGYAEBS", 0x31, "Hangul"),
    c(0xAEB3, None, "HANGUL SYLLABLE GGYAES", 0x31, "Hangul"),
    c(0xAEB4, None, "HANGUL SYLLABLE GGYAESS", 0x31, "Hangul"),
    c(0xAEB5, None, "HANGUL SYLLABLE GGYAENG", 0x31, "Hangul"),
    c(0xAEB6, None, "HANGUL SYLLABLE GGYAEJ", 0x31, "Hangul"),
    c(0xAEB7, None, "HANGUL SYLLABLE GGYAEC", 0x31, "Hangul"),
    c(0xAEB8, None, "HANGUL SYLLABLE GGYAEK", 0x31, "Hangul"),
    c(0xAEB9, None, "HANGUL SYLLABLE GGYAET", 0x31, "Hangul"),
    c(0xAEBA, None, "HANGUL SYLLABLE GGYAEP", 0x31, "Hangul"),
    c(0xAEBB, None, "HANGUL SYLLABLE GGYAEH", 0x31, "Hangul"),
    c(0xAEBC, None, "HANGUL SYLLABLE GGEO", 0x31, "Hangul"),
    c(0xAEBD, None, "HANGUL SYLLABLE GGEOG", 0x31, "Hangul"),
    c(0xAEBE, None, "HANGUL SYLLABLE GGEOGG", 0x31, "Hangul"),
    c(0xAEBF, None, "HANGUL SYLLABLE GGEOGS", 0x31, "Hangul"),
    c(0xAEC0, None, "HANGUL SYLLABLE GGEON", 0x31, "Hangul"),
    c(0xAEC1, None, "HANGUL SYLLABLE GGEONJ", 0x31, "Hangul"),
    c(0xAEC2, None, "HANGUL SYLLABLE GGEONH", 0x31, "Hangul"),
    c(0xAEC3, None, "HANGUL SYLLABLE GGEOD", 0x31, "Hangul"),
    c(0xAEC4, None, "HANGUL SYLLABLE GGEOL", 0x31, "Hangul"),
    c(0xAEC5, None, "HANGUL SYLLABLE GGEOLG", 0x31, "Hangul"),
    c(0xAEC6, None, "HANGUL SYLLABLE GGEOLM", 0x31, "Hangul"),
    c(0xAEC7, None, "HANGUL SYLLABLE GGEOLB", 0x31, "Hangul"),
    c(0xAEC8, None, "HANGUL SYLLABLE GGEOLS", 0x31, "Hangul"),
    c(0xAEC9, None, "HANGUL SYLLABLE GGEOLT", 0x31, "Hangul"),
    c(0xAECA, None, "HANGUL SYLLABLE GGEOLP", 0x31, "Hangul"),
    c(0xAECB, None, "HANGUL SYLLABLE GGEOLH", 0x31, "Hangul"),
    c(0xAECC, None, "HANGUL SYLLABLE GGEOM", 0x31, "Hangul"),
    c(0xAECD, None, "HANGUL SYLLABLE GGEOB", 0x31, "Hangul"),
    c(0xAECE, None, "HANGUL SYLLABLE GGEOBS", 0x31, "Hangul"),
    c(0xAECF, None, "HANGUL SYLLABLE GGEOS", 0x31, "Hangul"),
    c(0xAED0, None, "HANGUL SYLLABLE GGEOSS", 0x31, "Hangul"),
    c(0xAED1, None, "HANGUL SYLLABLE GGEONG", 0x31, "Hangul"),
    c(0xAED2, None, "HANGUL SYLLABLE GGEOJ", 0x31, "Hangul"),
    c(0xAED3, None, "HANGUL SYLLABLE GGEOC", 0x31, "Hangul"),
    c(0xAED4, None, "HANGUL SYLLABLE GGEOK", 0x31, "Hangul"),
    c(0xAED5, None, "HANGUL SYLLABLE GGEOT", 0x31, "Hangul"),
    c(0xAED6, None, "HANGUL SYLLABLE GGEOP", 0x31, "Hangul"),
    c(0xAED7, None, "HANGUL SYLLABLE GGEOH", 0x31, "Hangul"),
    c(0xAED8, None, "HANGUL SYLLABLE GGE", 0x31, "Hangul"),
    c(0xAED9, None, "HANGUL SYLLABLE GGEG", 0x31, "Hangul"),
    c(0xAEDA, None, "HANGUL SYLLABLE GGEGG", 0x31, "Hangul"),
    c(0xAEDB, None, "HANGUL SYLLABLE GGEGS", 0x31, "Hangul"),
    c(0xAEDC, None, "HANGUL SYLLABLE GGEN", 0x31, "Hangul"),
    c(0xAEDD, None, "HANGUL SYLLABLE GGENJ", 0x31, "Hangul"),
    c(0xAEDE, None, "HANGUL SYLLABLE GGENH", 0x31, "Hangul"),
    c(0xAEDF, None, "HANGUL SYLLABLE GGED", 0x31, "Hangul"),
    c(0xAEE0, None, "HANGUL SYLLABLE GGEL", 0x31, "Hangul"),
    c(0xAEE1, None, "HANGUL SYLLABLE GGELG", 0x31, "Hangul"),
    c(0xAEE2, None, "HANGUL SYLLABLE GGELM", 0x31, "Hangul"),
    c(0xAEE3, None, "HANGUL SYLLABLE GGELB", 0x31, "Hangul"),
    c(0xAEE4, None, "HANGUL SYLLABLE GGELS", 0x31, "Hangul"),
    c(0xAEE5, None, "HANGUL SYLLABLE GGELT", 0x31, "Hangul"),
    c(0xAEE6, None, "HANGUL SYLLABLE GGELP", 0x31, "Hangul"),
    c(0xAEE7, None, "HANGUL SYLLABLE GGELH", 0x31, "Hangul"),
    c(0xAEE8, None, "HANGUL SYLLABLE GGEM", 0x31, "Hangul"),
    c(0xAEE9, None, "HANGUL SYLLABLE GGEB", 0x31, "Hangul"),
    c(0xAEEA, None, "HANGUL SYLLABLE GGEBS", 0x31, "Hangul"),
    c(0xAEEB, None, "HANGUL SYLLABLE GGES", 0x31, "Hangul"),
    c(0xAEEC, None, "HANGUL SYLLABLE GGESS", 0x31, "Hangul"),
    c(0xAEED, None, "HANGUL SYLLABLE GGENG", 0x31, "Hangul"),
    c(0xAEEE, None, "HANGUL SYLLABLE GGEJ", 0x31, "Hangul"),
    c(0xAEEF, None, "HANGUL SYLLABLE GGEC", 0x31, "Hangul"),
    c(0xAEF0, None, "HANGUL SYLLABLE GGEK", 0x31, "Hangul"),
    c(0xAEF1, None, "HANGUL SYLLABLE GGET", 0x31, "Hangul"),
    c(0xAEF2, None, "HANGUL SYLLABLE GGEP", 0x31, "Hangul"),
    c(0xAEF3, None, "HANGUL SYLLABLE GGEH", 0x31, "Hangul"),
    c(0xAEF4, None, "HANGUL SYLLABLE GGYEO", 0x31, "Hangul"),
    c(0xAEF5, None, "HANGUL SYLLABLE GGYEOG", 0x31, "Hangul"),
    c(0xAEF6, None, "HANGUL SYLLABLE GGYEOGG", 0x31, "Hangul"),
    c(0xAEF7, None, "HANGUL SYLLABLE GGYEOGS", 0x31, "Hangul"),
    c(0xAEF8, None, "HANGUL SYLLABLE GGYEON", 0x31, "Hangul"),
    c(0xAEF9, None, "HANGUL SYLLABLE GGYEONJ", 0x31, "Hangul"),
    c(0xAEFA, None, "HANGUL SYLLABLE GGYEONH", 0x31, "Hangul"),
    c(0xAEFB, None, "HANGUL SYLLABLE GGYEOD", 0x31, "Hangul"),
    c(0xAEFC, None, "HANGUL SYLLABLE GGYEOL", 0x31, "Hangul"),
    c(0xAEFD, None, "HANGUL SYLLABLE GGYEOLG", 0x31, "Hangul"),
    c(0xAEFE, None, "HANGUL SYLLABLE GGYEOLM", 0x31, "Hangul"),
    c(0xAEFF, None, "HANGUL SYLLABLE GGYEOLB", 0x31, "Hangul"),
    c(0xAF00, None, "HANGUL SYLLABLE GGYEOLS", 0x31, "Hangul"),
    c(0xAF01, None, "HANGUL SYLLABLE GGYEOLT", 0x31, "Hangul"),
    c(0xAF02, None, "HANGUL SYLLABLE GGYEOLP", 0x31, "Hangul"),
    c(0xAF03, None, "HANGUL SYLLABLE GGYEOLH", 0x31, "Hangul"),
    c(0xAF04, None, "HANGUL SYLLABLE GGYEOM", 0x31, "Hangul"),
    c(0xAF05, None, "HANGUL SYLLABLE GGYEOB", 0x31, "Hangul"),
    c(0xAF06, None, "HANGUL SYLLABLE GGYEOBS", 0x31, "Hangul"),
    c(0xAF07, None, "HANGUL SYLLABLE GGYEOS", 0x31, "Hangul"),
    c(0xAF08, None, "HANGUL SYLLABLE GGYEOSS", 0x31, "Hangul"),
    c(0xAF09, None, "HANGUL SYLLABLE GGYEONG", 0x31, "Hangul"),
    c(0xAF0A, None, "HANGUL SYLLABLE GGYEOJ", 0x31, "Hangul"),
    c(0xAF0B, None, "HANGUL SYLLABLE GGYEOC", 0x31, "Hangul"),
    c(0xAF0C, None, "HANGUL SYLLABLE GGYEOK", 0x31, "Hangul"),
    c(0xAF0D, None, "HANGUL SYLLABLE GGYEOT", 0x31, "Hangul"),
    c(0xAF0E, None, "HANGUL SYLLABLE GGYEOP", 0x31, "Hangul"),
    c(0xAF0F, None, "HANGUL SYLLABLE GGYEOH", 0x31, "Hangul"),
    c(0xAF10, None, "HANGUL SYLLABLE GGYE", 0x31, "Hangul"),
    c(0xAF11, None, "HANGUL SYLLABLE GGYEG", 0x31, "Hangul"),
    c(0xAF12, None, "HANGUL SYLLABLE GGYEGG", 0x31, "Hangul"),
    c(0xAF13, None, "HANGUL SYLLABLE GGYEGS", 0x31, "Hangul"),
    c(0xAF14, None, "HANGUL SYLLABLE GGYEN", 0x31, "Hangul"),
    c(0xAF15, None, "HANGUL SYLLABLE GGYENJ", 0x31, "Hangul"),
    c(0xAF16, None, "HANGUL SYLLABLE GGYENH", 0x31, "Hangul"),
    c(0xAF17, None, "HANGUL SYLLABLE GGYED", 0x31, "Hangul"),
    c(0xAF18, None, "HANGUL SYLLABLE GGYEL", 0x31, "Hangul"),
    c(0xAF19, None, "HANGUL SYLLABLE GGYELG", 0x31, "Hangul"),
    c(0xAF1A, None, "HANGUL SYLLABLE GGYELM", 0x31, "Hangul"),
    c(0xAF1B, None, "HANGUL SYLLABLE GGYELB", 0x31, "Hangul"),
    c(0xAF1C, None, "HANGUL SYLLABLE GGYELS", 0x31, "Hangul"),
    c(0xAF1D, None, "HANGUL SYLLABLE GGYELT", 0x31, "Hangul"),
    c(0xAF1E, None, "HANGUL SYLLABLE GGYELP", 0x31, "Hangul"),
    c(0xAF1F, None, "HANGUL SYLLABLE GGYELH", 0x31, "Hangul"),
    c(0xAF20, None, "HANGUL SYLLABLE GGYEM", 0x31, "Hangul"),
    c(0xAF21, None, "HANGUL SYLLABLE GGYEB", 0x31, "Hangul"),
    c(0xAF22, None, "HANGUL SYLLABLE GGYEBS", 0x31, "Hangul"),
    c(0xAF23, None, "HANGUL SYLLABLE GGYES", 0x31, "Hangul"),
    c(0xAF24, None, "HANGUL SYLLABLE GGYESS", 0x31, "Hangul"),
    c(0xAF25, None, "HANGUL SYLLABLE GGYENG", 0x31, "Hangul"),
    c(0xAF26, None, "HANGUL SYLLABLE GGYEJ", 0x31, "Hangul"),
    c(0xAF27, None, "HANGUL SYLLABLE GGYEC", 0x31, "Hangul"),
    c(0xAF28, None, "HANGUL SYLLABLE GGYEK", 0x31, "Hangul"),
    c(0xAF29, None, "HANGUL SYLLABLE GGYET", 0x31, "Hangul"),
    c(0xAF2A, None, "HANGUL SYLLABLE GGYEP", 0x31, "Hangul"),
    c(0xAF2B, None, "HANGUL SYLLABLE GGYEH", 0x31, "Hangul"),
    c(0xAF2C, None, "HANGUL SYLLABLE GGO", 0x31, "Hangul"),
    c(0xAF2D, None, "HANGUL SYLLABLE GGOG", 0x31, "Hangul"),
    c(0xAF2E, None, "HANGUL SYLLABLE GGOGG", 0x31, "Hangul"),
    c(0xAF2F, None, "HANGUL SYLLABLE GGOGS", 0x31, "Hangul"),
    c(0xAF30, None, "HANGUL SYLLABLE GGON", 0x31, "Hangul"),
    c(0xAF31, None, "HANGUL SYLLABLE GGONJ", 0x31, "Hangul"),
    c(0xAF32, None, "HANGUL SYLLABLE GGONH", 0x31, "Hangul"),
    c(0xAF33, None, "HANGUL SYLLABLE GGOD", 0x31, "Hangul"),
    c(0xAF34, None, "HANGUL SYLLABLE GGOL", 0x31, "Hangul"),
    c(0xAF35, None, "HANGUL SYLLABLE GGOLG", 0x31, "Hangul"),
    c(0xAF36, None, "HANGUL SYLLABLE GGOLM", 0x31, "Hangul"),
    c(0xAF37, None, "HANGUL SYLLABLE GGOLB", 0x31, "Hangul"),
    c(0xAF38, None, "HANGUL SYLLABLE GGOLS", 0x31, "Hangul"),
    c(0xAF39, None, "HANGUL SYLLABLE GGOLT", 0x31, "Hangul"),
    c(0xAF3A, None, "HANGUL SYLLABLE GGOLP", 0x31, "Hangul"),
    c(0xAF3B, None, "HANGUL SYLLABLE GGOLH", 0x31, "Hangul"),
    c(0xAF3C, None, "HANGUL SYLLABLE GGOM", 0x31, "Hangul"),
    c(0xAF3D, None, "HANGUL SYLLABLE GGOB", 0x31, "Hangul"),
    c(0xAF3E, None, "HANGUL SYLLABLE GGOBS", 0x31, "Hangul"),
    c(0xAF3F, None, "HANGUL SYLLABLE GGOS", 0x31, "Hangul"),
    c(0xAF40, None, "HANGUL SYLLABLE GGOSS", 0x31, "Hangul"),
    c(0xAF41, None, "HANGUL SYLLABLE GGONG", 0x31, "Hangul"),
    c(0xAF42, None, "HANGUL SYLLABLE GGOJ", 0x31, "Hangul"),
    c(0xAF43, None, "HANGUL SYLLABLE GGOC", 0x31, "Hangul"),
    c(0xAF44, None, "HANGUL SYLLABLE GGOK", 0x31, "Hangul"),
    c(0xAF45, None, "HANGUL SYLLABLE GGOT", 0x31, "Hangul"),
    c(0xAF46, None, "HANGUL SYLLABLE GGOP", 0x31, "Hangul"),
    c(0xAF47, None, "HANGUL SYLLABLE GGOH", 0x31, "Hangul"),
    c(0xAF48, None, "HANGUL SYLLABLE GGWA", 0x31, "Hangul"),
    c(0xAF49, None, "HANGUL SYLLABLE GGWAG", 0x31, "Hangul"),
    c(0xAF4A, None, "HANGUL SYLLABLE GGWAGG", 0x31, "Hangul"),
    c(0xAF4B, None, "HANGUL SYLLABLE GGWAGS", 0x31, "Hangul"),
    c(0xAF4C, None, "HANGUL SYLLABLE GGWAN", 0x31, "Hangul"),
    c(0xAF4D, None, "HANGUL SYLLABLE GGWANJ", 0x31, "Hangul"),
    c(0xAF4E, None, "HANGUL SYLLABLE GGWANH", 0x31, "Hangul"),
    c(0xAF4F, None, "HANGUL SYLLABLE GGWAD", 0x31, "Hangul"),
    c(0xAF50, None, "HANGUL SYLLABLE GGWAL", 0x31, "Hangul"),
    c(0xAF51, None, "HANGUL SYLLABLE GGWALG", 0x31, "Hangul"),
    c(0xAF52, None, "HANGUL SYLLABLE GGWALM", 0x31, "Hangul"),
    c(0xAF53, None, "HANGUL SYLLABLE GGWALB", 0x31, "Hangul"),
    c(0xAF54, None, "HANGUL SYLLABLE GGWALS", 0x31, "Hangul"),
    c(0xAF55, None, "HANGUL SYLLABLE GGWALT", 0x31, "Hangul"),
    c(0xAF56, None, "HANGUL SYLLABLE GGWALP", 0x31, "Hangul"),
    c(0xAF57, None, "HANGUL SYLLABLE GGWALH", 0x31, "Hangul"),
    c(0xAF58, None, "HANGUL SYLLABLE GGWAM", 0x31, "Hangul"),
    c(0xAF59, None, "HANGUL SYLLABLE GGWAB", 0x31, "Hangul"),
    c(0xAF5A, None, "HANGUL SYLLABLE GGWABS", 0x31, "Hangul"),
    c(0xAF5B, None, "HANGUL SYLLABLE GGWAS", 0x31, "Hangul"),
    c(0xAF5C, None, "HANGUL SYLLABLE GGWASS", 0x31, "Hangul"),
    c(0xAF5D, None, "HANGUL SYLLABLE GGWANG", 0x31, "Hangul"),
    c(0xAF5E, None, "HANGUL SYLLABLE GGWAJ", 0x31, "Hangul"),
    c(0xAF5F, None, "HANGUL SYLLABLE GGWAC", 0x31, "Hangul"),
    c(0xAF60, None, "HANGUL SYLLABLE GGWAK", 0x31, "Hangul"),
    c(0xAF61, None, "HANGUL SYLLABLE GGWAT", 0x31, "Hangul"),
    c(0xAF62, None, "HANGUL SYLLABLE GGWAP", 0x31, "Hangul"),
    c(0xAF63, None, "HANGUL SYLLABLE GGWAH", 0x31, "Hangul"),
    c(0xAF64, None, "HANGUL SYLLABLE GGWAE", 0x31, "Hangul"),
    c(0xAF65, None, "HANGUL SYLLABLE GGWAEG", 0x31, "Hangul"),
    c(0xAF66, None, "HANGUL SYLLABLE GGWAEGG", 0x31, "Hangul"),
    c(0xAF67, None, "HANGUL SYLLABLE GGWAEGS", 0x31, "Hangul"),
    c(0xAF68, None, "HANGUL SYLLABLE GGWAEN", 0x31, "Hangul"),
    c(0xAF69, None, "HANGUL SYLLABLE GGWAENJ", 0x31, "Hangul"),
    c(0xAF6A, None, "HANGUL SYLLABLE GGWAENH", 0x31, "Hangul"),
    c(0xAF6B, None, "HANGUL SYLLABLE GGWAED", 0x31, "Hangul"),
    c(0xAF6C, None, "HANGUL SYLLABLE GGWAEL", 0x31, "Hangul"),
    c(0xAF6D, None, "HANGUL SYLLABLE GGWAELG", 0x31, "Hangul"),
    c(0xAF6E, None, "HANGUL SYLLABLE GGWAELM", 0x31, "Hangul"),
    c(0xAF6F, None, "HANGUL SYLLABLE GGWAELB", 0x31, "Hangul"),
    c(0xAF70, None, "HANGUL SYLLABLE GGWAELS", 0x31, "Hangul"),
    c(0xAF71, None, "HANGUL SYLLABLE GGWAELT", 0x31, "Hangul"),
    c(0xAF72, None, "HANGUL SYLLABLE GGWAELP", 0x31, "Hangul"),
    c(0xAF73, None, "HANGUL SYLLABLE GGWAELH", 0x31, "Hangul"),
    c(0xAF74, None, "HANGUL SYLLABLE GGWAEM", 0x31, "Hangul"),
    c(0xAF75, None, "HANGUL SYLLABLE GGWAEB", 0x31, "Hangul"),
    c(0xAF76, None, "HANGUL SYLLABLE GGWAEBS", 0x31, "Hangul"),
    c(0xAF77, None, "HANGUL SYLLABLE GGWAES", 0x31, "Hangul"),
    c(0xAF78, None, "HANGUL SYLLABLE GGWAESS", 0x31, "Hangul"),
    c(0xAF79, None, "HANGUL SYLLABLE GGWAENG", 0x31, "Hangul"),
    c(0xAF7A, None, "HANGUL SYLLABLE GGWAEJ", 0x31, "Hangul"),
    c(0xAF7B, None, "HANGUL SYLLABLE GGWAEC", 0x31, "Hangul"),
    c(0xAF7C, None, "HANGUL SYLLABLE GGWAEK", 0x31, "Hangul"),
    c(0xAF7D, None, "HANGUL SYLLABLE GGWAET", 0x31, "Hangul"),
    c(0xAF7E, None, "HANGUL SYLLABLE GGWAEP", 0x31, "Hangul"),
    c(0xAF7F, None, "HANGUL SYLLABLE GGWAEH", 0x31, "Hangul"),
    c(0xAF80, None, "HANGUL SYLLABLE GGOE", 0x31, "Hangul"),
    c(0xAF81, None, "HANGUL SYLLABLE GGOEG", 0x31, "Hangul"),
    c(0xAF82, None, "HANGUL SYLLABLE GGOEGG", 0x31, "Hangul"),
    c(0xAF83, None, "HANGUL SYLLABLE GGOEGS", 0x31, "Hangul"),
    c(0xAF84, None, "HANGUL SYLLABLE GGOEN", 0x31, "Hangul"),
    c(0xAF85, None, "HANGUL SYLLABLE GGOENJ", 0x31, "Hangul"),
    c(0xAF86, None, "HANGUL SYLLABLE GGOENH", 0x31, "Hangul"),
    c(0xAF87, None, "HANGUL SYLLABLE GGOED", 0x31, "Hangul"),
    c(0xAF88, None, "HANGUL SYLLABLE GGOEL", 0x31, "Hangul"),
    c(0xAF89, None, "HANGUL SYLLABLE GGOELG", 0x31, "Hangul"),
    c(0xAF8A, None, "HANGUL SYLLABLE GGOELM", 0x31, "Hangul"),
    c(0xAF8B, None, "HANGUL SYLLABLE GGOELB", 0x31, "Hangul"),
    c(0xAF8C, None, "HANGUL SYLLABLE GGOELS", 0x31, "Hangul"),
    c(0xAF8D, None, "HANGUL SYLLABLE GGOELT", 0x31, "Hangul"),
    c(0xAF8E, None, "HANGUL SYLLABLE GGOELP", 0x31, "Hangul"),
    c(0xAF8F, None, "HANGUL SYLLABLE GGOELH", 0x31, "Hangul"),
    c(0xAF90, None, "HANGUL SYLLABLE GGOEM", 0x31, "Hangul"),
    c(0xAF91, None, "HANGUL SYLLABLE GGOEB", 0x31, "Hangul"),
    c(0xAF92, None, "HANGUL SYLLABLE GGOEBS", 0x31, "Hangul"),
    c(0xAF93, None, "HANGUL SYLLABLE GGOES", 0x31, "Hangul"),
    c(0xAF94, None, "HANGUL SYLLABLE GGOESS", 0x31, "Hangul"),
    c(0xAF95, None, "HANGUL SYLLABLE GGOENG", 0x31, "Hangul"),
    c(0xAF96, None, "HANGUL SYLLABLE GGOEJ", 0x31, "Hangul"),
    c(0xAF97, None, "HANGUL SYLLABLE GGOEC", 0x31, "Hangul"),
    c(0xAF98, None, "HANGUL SYLLABLE GGOEK", 0x31, "Hangul"),
    c(0xAF99, None, "HANGUL SYLLABLE GGOET", 0x31, "Hangul"),
    c(0xAF9A, None, "HANGUL SYLLABLE GGOEP", 0x31, "Hangul"),
    c(0xAF9B, None, "HANGUL SYLLABLE GGOEH", 0x31, "Hangul"),
    c(0xAF9C, None, "HANGUL SYLLABLE GGYO", 0x31, "Hangul"),
    c(0xAF9D, None, "HANGUL SYLLABLE GGYOG", 0x31, "Hangul"),
    c(0xAF9E, None, "HANGUL SYLLABLE GGYOGG", 0x31, "Hangul"),
    c(0xAF9F, None, "HANGUL SYLLABLE GGYOGS", 0x31, "Hangul"),
    c(0xAFA0, None, "HANGUL SYLLABLE GGYON", 0x31, "Hangul"),
    c(0xAFA1, None, "HANGUL SYLLABLE GGYONJ", 0x31, "Hangul"),
    c(0xAFA2, None, "HANGUL SYLLABLE GGYONH", 0x31, "Hangul"),
    c(0xAFA3, None, "HANGUL SYLLABLE GGYOD", 0x31, "Hangul"),
    c(0xAFA4, None, "HANGUL SYLLABLE GGYOL", 0x31, "Hangul"),
    c(0xAFA5, None, "HANGUL SYLLABLE GGYOLG", 0x31, "Hangul"),
    c(0xAFA6, None, "HANGUL SYLLABLE GGYOLM", 0x31, "Hangul"),
    c(0xAFA7, None, "HANGUL SYLLABLE GGYOLB", 0x31, "Hangul"),
    c(0xAFA8, None, "HANGUL SYLLABLE GGYOLS", 0x31, "Hangul"),
    c(0xAFA9, None, "HANGUL SYLLABLE GGYOLT", 0x31, "Hangul"),
    c(0xAFAA, None, "HANGUL SYLLABLE GGYOLP", 0x31, "Hangul"),
    c(0xAFAB, None, "HANGUL SYLLABLE GGYOLH", 0x31, "Hangul"),
    c(0xAFAC, None, "HANGUL SYLLABLE GGYOM", 0x31, "Hangul"),
    c(0xAFAD, None, "HANGUL SYLLABLE GGYOB", 0x31, "Hangul"),
    c(0xAFAE, None, "HANGUL SYLLABLE GGYOBS", 0x31, "Hangul"),
    c(0xAFAF, None, "HANGUL SYLLABLE GGYOS", 0x31, "Hangul"),
    c(0xAFB0, None, "HANGUL SYLLABLE GGYOSS", 0x31, "Hangul"),
    c(0xAFB1, None, "HANGUL SYLLABLE GGYONG", 0x31, "Hangul"),
    c(0xAFB2, None, "HANGUL SYLLABLE GGYOJ", 0x31, "Hangul"),
    c(0xAFB3, None, "HANGUL SYLLABLE GGYOC", 0x31, "Hangul"),
    c(0xAFB4, None, "HANGUL SYLLABLE GGYOK", 0x31, "Hangul"),
    c(0xAFB5, None, "HANGUL SYLLABLE GGYOT", 0x31, "Hangul"),
    c(0xAFB6, None, "HANGUL SYLLABLE GGYOP", 0x31, "Hangul"),
    c(0xAFB7, None, "HANGUL SYLLABLE GGYOH", 0x31, "Hangul"),
    c(0xAFB8, None, "HANGUL SYLLABLE GGU", 0x31, "Hangul"),
    c(0xAFB9, None, "HANGUL SYLLABLE GGUG", 0x31, "Hangul"),
    c(0xAFBA, None, "HANGUL SYLLABLE GGUGG", 0x31, "Hangul"),
    c(0xAFBB, None, "HANGUL SYLLABLE GGUGS", 0x31, "Hangul"),
    c(0xAFBC, None, "HANGUL SYLLABLE GGUN", 0x31, "Hangul"),
    c(0xAFBD, None, "HANGUL SYLLABLE GGUNJ", 0x31, "Hangul"),
    c(0xAFBE, None, "HANGUL SYLLABLE GGUNH", 0x31, "Hangul"),
    c(0xAFBF, None, "HANGUL SYLLABLE GGUD", 0x31, "Hangul"),
    c(0xAFC0, None, "HANGUL SYLLABLE GGUL", 0x31, "Hangul"),
    c(0xAFC1, None, "HANGUL SYLLABLE GGULG", 0x31, "Hangul"),
    c(0xAFC2, None, "HANGUL SYLLABLE GGULM", 0x31, "Hangul"),
    c(0xAFC3, None, "HANGUL SYLLABLE GGULB", 0x31, "Hangul"),
    c(0xAFC4, None, "HANGUL SYLLABLE GGULS", 0x31, "Hangul"),
    c(0xAFC5, None, "HANGUL SYLLABLE GGULT", 0x31, "Hangul"),
    c(0xAFC6, None, "HANGUL SYLLABLE GGULP", 0x31, "Hangul"),
    c(0xAFC7, None, "HANGUL SYLLABLE GGULH", 0x31, "Hangul"),
    c(0xAFC8, None, "HANGUL SYLLABLE GGUM", 0x31, "Hangul"),
    c(0xAFC9, None, "HANGUL SYLLABLE GGUB", 0x31, "Hangul"),
    c(0xAFCA, None, "HANGUL SYLLABLE GGUBS", 0x31, "Hangul"),
    c(0xAFCB, None, "HANGUL SYLLABLE GGUS", 0x31, "Hangul"),
    c(0xAFCC, None, "HANGUL SYLLABLE GGUSS", 0x31, "Hangul"),
    c(0xAFCD, None, "HANGUL SYLLABLE GGUNG", 0x31, "Hangul"),
    c(0xAFCE, None, "HANGUL SYLLABLE GGUJ", 0x31, "Hangul"),
    c(0xAFCF, None, "HANGUL SYLLABLE GGUC", 0x31, "Hangul"),
    c(0xAFD0, None, "HANGUL SYLLABLE GGUK", 0x31, "Hangul"),
    c(0xAFD1, None, "HANGUL SYLLABLE GGUT", 0x31, "Hangul"),
    c(0xAFD2, None, "HANGUL SYLLABLE GGUP", 0x31, "Hangul"),
    c(0xAFD3, None, "HANGUL SYLLABLE GGUH", 0x31, "Hangul"),
    c(0xAFD4, None, "HANGUL SYLLABLE GGWEO", 0x31, "Hangul"),
    c(0xAFD5, None, "HANGUL SYLLABLE GGWEOG", 0x31, "Hangul"),
    c(0xAFD6, None, "HANGUL SYLLABLE GGWEOGG", 0x31, "Hangul"),
    c(0xAFD7, None, "HANGUL SYLLABLE GGWEOGS", 0x31, "Hangul"),
    c(0xAFD8, None, "HANGUL SYLLABLE GGWEON", 0x31, "Hangul"),
    c(0xAFD9, None, "HANGUL SYLLABLE GGWEONJ", 0x31, "Hangul"),
    c(0xAFDA, None, "HANGUL SYLLABLE GGWEONH", 0x31, "Hangul"),
    c(0xAFDB, None, "HANGUL SYLLABLE GGWEOD", 0x31, "Hangul"),
    c(0xAFDC, None, "HANGUL SYLLABLE GGWEOL", 0x31, "Hangul"),
    c(0xAFDD, None, "HANGUL SYLLABLE GGWEOLG", 0x31, "Hangul"),
    c(0xAFDE, None, "HANGUL SYLLABLE GGWEOLM", 0x31, "Hangul"),
    c(0xAFDF, None, "HANGUL SYLLABLE GGWEOLB", 0x31, "Hangul"),
    c(0xAFE0, None, "HANGUL SYLLABLE GGWEOLS", 0x31, "Hangul"),
    c(0xAFE1, None, "HANGUL SYLLABLE GGWEOLT", 0x31, "Hangul"),
    c(0xAFE2, None, "HANGUL SYLLABLE GGWEOLP", 0x31, "Hangul"),
    c(0xAFE3, None, "HANGUL SYLLABLE GGWEOLH", 0x31, "Hangul"),
    c(0xAFE4, None, "HANGUL SYLLABLE GGWEOM", 0x31, "Hangul"),
    c(0xAFE5, None, "HANGUL SYLLABLE GGWEOB", 0x31, "Hangul"),
    c(0xAFE6, None, "HANGUL SYLLABLE GGWEOBS", 0x31, "Hangul"),
    c(0xAFE7, None, "HANGUL SYLLABLE GGWEOS", 0x31, "Hangul"),
    c(0xAFE8, None, "HANGUL SYLLABLE GGWEOSS", 0x31, "Hangul"),
    c(0xAFE9, None, "HANGUL SYLLABLE GGWEONG", 0x31, "Hangul"),
    c(0xAFEA, None, "HANGUL SYLLABLE GGWEOJ", 0x31, "Hangul"),
    c(0xAFEB, None, "HANGUL SYLLABLE GGWEOC", 0x31, "Hangul"),
    c(0xAFEC, None, "HANGUL SYLLABLE GGWEOK", 0x31, "Hangul"),
    c(0xAFED, None, "HANGUL SYLLABLE GGWEOT", 0x31, "Hangul"),
    c(0xAFEE, None, "HANGUL SYLLABLE GGWEOP", 0x31, "Hangul"),
    c(0xAFEF, None, "HANGUL SYLLABLE GGWEOH", 0x31, "Hangul"),
    c(0xAFF0, None, "HANGUL SYLLABLE GGWE", 0x31, "Hangul"),
    c(0xAFF1, None, "HANGUL SYLLABLE GGWEG", 0x31, "Hangul"),
    c(0xAFF2, None, "HANGUL SYLLABLE GGWEGG", 0x31, "Hangul"),
    c(0xAFF3, None, "HANGUL SYLLABLE GGWEGS", 0x31, "Hangul"),
    c(0xAFF4, None, "HANGUL SYLLABLE GGWEN", 0x31, "Hangul"),
    c(0xAFF5, None, "HANGUL SYLLABLE GGWENJ", 0x31, "Hangul"),
    c(0xAFF6, None, "HANGUL SYLLABLE GGWENH", 0x31, "Hangul"),
    c(0xAFF7, None, "HANGUL SYLLABLE GGWED", 0x31, "Hangul"),
    c(0xAFF8, None, "HANGUL SYLLABLE GGWEL", 0x31, "Hangul"),
    c(0xAFF9, None, "HANGUL SYLLABLE GGWELG", 0x31, "Hangul"),
    c(0xAFFA, None, "HANGUL SYLLABLE GGWELM", 0x31, "Hangul"),
    c(0xAFFB, None, "HANGUL SYLLABLE GGWELB", 0x31, "Hangul"),
    c(0xAFFC, None, "HANGUL SYLLABLE GGWELS", 0x31, "Hangul"),
    c(0xAFFD, None, "HANGUL SYLLABLE GGWELT", 0x31, "Hangul"),
    c(0xAFFE, None, "HANGUL SYLLABLE GGWELP", 0x31, "Hangul"),
    c(0xAFFF, None, "HANGUL SYLLABLE GGWELH", 0x31, "Hangul"),
    c(0xB000, None, "HANGUL SYLLABLE GGWEM", 0x31, "Hangul"),
    c(0xB001, None, "HANGUL SYLLABLE GGWEB", 0x31, "Hangul"),
    c(0xB002, None, "HANGUL SYLLABLE GGWEBS", 0x31, "Hangul"),
    c(0xB003, None, "HANGUL SYLLABLE GGWES", 0x31, "Hangul"),
    c(0xB004, None, "HANGUL SYLLABLE GGWESS", 0x31, "Hangul"),
    c(0xB005, None, "HANGUL SYLLABLE GGWENG", 0x31, "Hangul"),
    c(0xB006, None, "HANGUL SYLLABLE GGWEJ", 0x31, "Hangul"),
    c(0xB007, None, "HANGUL SYLLABLE GGWEC", 0x31, "Hangul"),
    c(0xB008, None, "HANGUL SYLLABLE GGWEK", 0x31, "Hangul"),
    c(0xB009, None, "HANGUL SYLLABLE GGWET", 0x31, "Hangul"),
    c(0xB00A, None, "HANGUL SYLLABLE GGWEP", 0x31, "Hangul"),
    c(0xB00B, None, "HANGUL SYLLABLE GGWEH", 0x31, "Hangul"),
    c(0xB00C, None, "HANGUL SYLLABLE GGWI", 0x31, "Hangul"),
    c(0xB00D, None, "HANGUL SYLLABLE GGWIG", 0x31, "Hangul"),
    c(0xB00E, None, "HANGUL SYLLABLE GGWIGG", 0x31, "Hangul"),
    c(0xB00F, None, "HANGUL SYLLABLE GGWIGS", 0x31, "Hangul"),
    c(0xB010, None, "HANGUL SYLLABLE GGWIN", 0x31, "Hangul"),
    c(0xB011, None, "HANGUL SYLLABLE GGWINJ", 0x31, "Hangul"),
    c(0xB012, None, "HANGUL SYLLABLE GGWINH", 0x31, "Hangul"),
    c(0xB013, None, "HANGUL SYLLABLE GGWID", 0x31, "Hangul"),
    c(0xB014, None, "HANGUL SYLLABLE GGWIL", 0x31, "Hangul"),
    c(0xB015, None, "HANGUL SYLLABLE GGWILG", 0x31, "Hangul"),
    c(0xB016, None, "HANGUL SYLLABLE GGWILM", 0x31, "Hangul"),
    c(0xB017, None, "HANGUL SYLLABLE GGWILB", 0x31, "Hangul"),
    c(0xB018, None, "HANGUL SYLLABLE GGWILS", 0x31, "Hangul"),
    c(0xB019, None, "HANGUL SYLLABLE GGWILT", 0x31, "Hangul"),
    c(0xB01A, None, "HANGUL SYLLABLE GGWILP", 0x31, "Hangul"),
    c(0xB01B, None, "HANGUL SYLLABLE GGWILH", 0x31, "Hangul"),
    c(0xB01C, None, "HANGUL SYLLABLE GGWIM", 0x31, "Hangul"),
    c(0xB01D, None, "HANGUL SYLLABLE GGWIB", 0x31, "Hangul"),
    c(0xB01E, None, "HANGUL SYLLABLE GGWIBS", 0x31, "Hangul"),
    c(0xB01F, None, "HANGUL SYLLABLE GGWIS", 0x31, "Hangul"),
    c(0xB020, None, "HANGUL SYLLABLE GGWISS", 0x31, "Hangul"),
    c(0xB021, None, "HANGUL SYLLABLE GGWING", 0x31, "Hangul"),
    c(0xB022, None, "HANGUL SYLLABLE GGWIJ", 0x31, "Hangul"),
    c(0xB023, None, "HANGUL SYLLABLE GGWIC", 0x31, "Hangul"),
    c(0xB024, None, "HANGUL SYLLABLE GGWIK", 0x31, "Hangul"),
    c(0xB025, None, "HANGUL SYLLABLE GGWIT", 0x31, "Hangul"),
    c(0xB026, None, "HANGUL SYLLABLE GGWIP", 0x31, "Hangul"),
    c(0xB027, None, "HANGUL SYLLABLE GGWIH", 0x31, "Hangul"),
    c(0xB028, None, "HANGUL SYLLABLE GGYU", 0x31, "Hangul"),
    c(0xB029, None, "HANGUL SYLLABLE GGYUG", 0x31, "Hangul"),
    c(0xB02A, None, "HANGUL SYLLABLE GGYUGG", 0x31, "Hangul"),
    c(0xB02B, None, "HANGUL SYLLABLE GGYUGS", 0x31, "Hangul"),
    c(0xB02C, None, "HANGUL SYLLABLE GGYUN", 0x31, "Hangul"),
    c(0xB02D, None, "HANGUL SYLLABLE GGYUNJ", 0x31, "Hangul"),
    c(0xB02E, None, "HANGUL SYLLABLE GGYUNH", 0x31, "Hangul"),
    c(0xB02F, None, "HANGUL SYLLABLE GGYUD", 0x31, "Hangul"),
    c(0xB030, None, "HANGUL SYLLABLE GGYUL", 0x31, "Hangul"),
    c(0xB031, None, "HANGUL SYLLABLE GGYULG", 0x31, "Hangul"),
    c(0xB032, None, "HANGUL SYLLABLE GGYULM", 0x31, "Hangul"),
    c(0xB033, None, "HANGUL SYLLABLE GGYULB", 0x31, "Hangul"),
    c(0xB034, None, "HANGUL SYLLABLE GGYULS", 0x31, "Hangul"),
    c(0xB035, None, "HANGUL SYLLABLE GGYULT", 0x31, "Hangul"),
    c(0xB036, None, "HANGUL SYLLABLE GGYULP", 0x31, "Hangul"),
    c(0xB037, None, "HANGUL SYLLABLE GGYULH", 0x31, "Hangul"),
    c(0xB038, None, "HANGUL SYLLABLE GGYUM", 0x31, "Hangul"),
    c(0xB039, None, "HANGUL SYLLABLE GGYUB", 0x31, "Hangul"),
    c(0xB03A, None, "HANGUL SYLLABLE GGYUBS", 0x31, "Hangul"),
    c(0xB03B, None, "HANGUL SYLLABLE GGYUS", 0x31, "Hangul"),
    c(0xB03C, None, "HANGUL SYLLABLE GGYUSS", 0x31, "Hangul"),
    c(0xB03D, None, "HANGUL SYLLABLE GGYUNG", 0x31, "Hangul"),
    c(0xB03E, None, "HANGUL SYLLABLE GGYUJ", 0x31, "Hangul"),
    c(0xB03F, None, "HANGUL SYLLABLE GGYUC", 0x31, "Hangul"),
    c(0xB040, None, "HANGUL SYLLABLE GGYUK", 0x31, "Hangul"),
    c(0xB041, None, "HANGUL SYLLABLE GGYUT", 0x31, "Hangul"),
    c(0xB042, None, "HANGUL SYLLABLE GGYUP", 0x31, "Hangul"),
    c(0xB043, None, "HANGUL SYLLABLE GGYUH", 0x31, "Hangul"),
    c(0xB044, None, "HANGUL SYLLABLE GGEU", 0x31, "Hangul"),
    c(0xB045, None, "HANGUL SYLLABLE GGEUG", 0x31, "Hangul"),
    c(0xB046, None, "HANGUL SYLLABLE GGEUGG", 0x31, "Hangul"),
    c(0xB047, None, "HANGUL SYLLABLE GGEUGS", 0x31, "Hangul"),
    c(0xB048, None, "HANGUL SYLLABLE GGEUN", 0x31, "Hangul"),
    c(0xB049, None, "HANGUL SYLLABLE GGEUNJ", 0x31, "Hangul"),
    c(0xB04A, None, "HANGUL SYLLABLE GGEUNH", 0x31, "Hangul"),
    c(0xB04B, None, "HANGUL SYLLABLE GGEUD", 0x31, "Hangul"),
    c(0xB04C, None, "HANGUL SYLLABLE GGEUL", 0x31, "Hangul"),
    c(0xB04D, None, "HANGUL SYLLABLE GGEULG", 0x31, "Hangul"),
    c(0xB04E, None, "HANGUL SYLLABLE GGEULM", 0x31, "Hangul"),
    c(0xB04F, None, "HANGUL SYLLABLE GGEULB", 0x31, "Hangul"),
    c(0xB050, None, "HANGUL SYLLABLE GGEULS", 0x31, "Hangul"),
    c(0xB051, None, "HANGUL SYLLABLE GGEULT", 0x31, "Hangul"),
    c(0xB052, None, "HANGUL SYLLABLE GGEULP", 0x31, "Hangul"),
    c(0xB053, None, "HANGUL SYLLABLE GGEULH", 0x31, "Hangul"),
    c(0xB054, None, "HANGUL SYLLABLE GGEUM", 0x31, "Hangul"),
    c(0xB055, None, "HANGUL SYLLABLE GGEUB", 0x31, "Hangul"),
    c(0xB056, None, "HANGUL SYLLABLE GGEUBS", 0x31, "Hangul"),
    c(0xB057, None, "HANGUL SYLLABLE GGEUS", 0x31, "Hangul"),
    c(0xB058, None, "HANGUL SYLLABLE GGEUSS", 0x31, "Hangul"),
    c(0xB059, None, "HANGUL SYLLABLE GGEUNG", 0x31, "Hangul"),
    c(0xB05A, None, "HANGUL SYLLABLE GGEUJ", 0x31, "Hangul"),
    c(0xB05B, None, "HANGUL SYLLABLE GGEUC", 0x31, "Hangul"),
    c(0xB05C, None, "HANGUL SYLLABLE GGEUK", 0x31, "Hangul"),
    c(0xB05D, None, "HANGUL SYLLABLE GGEUT", 0x31, "Hangul"),
    c(0xB05E, None, "HANGUL SYLLABLE GGEUP", 0x31, "Hangul"),
    c(0xB05F, None, "HANGUL SYLLABLE GGEUH", 0x31, "Hangul"),
    c(0xB060, None, "HANGUL SYLLABLE GGYI", 0x31, "Hangul"),
    c(0xB061, None, "HANGUL SYLLABLE GGYIG", 0x31, "Hangul"),
    c(0xB062, None, "HANGUL SYLLABLE GGYIGG", 0x31, "Hangul"),
    c(0xB063, None, "HANGUL SYLLABLE GGYIGS", 0x31, "Hangul"),
    c(0xB064, None, "HANGUL SYLLABLE GGYIN", 0x31, "Hangul"),
    c(0xB065, None, "HANGUL SYLLABLE GGYINJ", 0x31, "Hangul"),
    c(0xB066, None, "HANGUL SYLLABLE GGYINH", 0x31, "Hangul"),
    c(0xB067, None, "HANGUL SYLLABLE GGYID", 0x31, "Hangul"),
    c(0xB068, None, "HANGUL SYLLABLE GGYIL", 0x31, "Hangul"),
    c(0xB069, None, "HANGUL SYLLABLE GGYILG", 0x31, "Hangul"),
    c(0xB06A, None, "HANGUL SYLLABLE GGYILM", 0x31, "Hangul"),
    c(0xB06B, None, "HANGUL SYLLABLE GGYILB", 0x31, "Hangul"),
    c(0xB06C, None, "HANGUL SYLLABLE GGYILS", 0x31, "Hangul"),
    c(0xB06D, None, "HANGUL SYLLABLE GGYILT", 0x31, "Hangul"),
    c(0xB06E, None, "HANGUL SYLLABLE GGYILP", 0x31, "Hangul"),
    c(0xB06F, None, "HANGUL SYLLABLE GGYILH", 0x31, "Hangul"),
    c(0xB070, None, "HANGUL SYLLABLE GGYIM", 0x31, "Hangul"),
    c(0xB071, None, "HANGUL SYLLABLE GGYIB", 0x31, "Hangul"),
    c(0xB072, None, "HANGUL SYLLABLE GGYIBS", 0x31, "Hangul"),
    c(0xB073, None, "HANGUL SYLLABLE GGYIS", 0x31, "Hangul"),
    c(0xB074, None, "HANGUL SYLLABLE GGYISS", 0x31, "Hangul"),
    c(0xB075, None, "HANGUL SYLLABLE GGYING", 0x31, "Hangul"),
    c(0xB076, None, "HANGUL SYLLABLE GGYIJ", 0x31, "Hangul"),
    c(0xB077, None, "HANGUL SYLLABLE GGYIC", 0x31, "Hangul"),
    c(0xB078, None, "HANGUL SYLLABLE GGYIK", 0x31, "Hangul"),
    c(0xB079, None, "HANGUL SYLLABLE GGYIT", 0x31, "Hangul"),
    c(0xB07A, None, "HANGUL SYLLABLE GGYIP", 0x31, "Hangul"),
    c(0xB07B, None, "HANGUL SYLLABLE GGYIH", 0x31, "Hangul"),
    c(0xB07C, None, "HANGUL SYLLABLE GGI", 0x31, "Hangul"),
    c(0xB07D, None, "HANGUL SYLLABLE GGIG", 0x31, "Hangul"),
    c(0xB07E, None, "HANGUL SYLLABLE GGIGG", 0x31, "Hangul"),
    c(0xB07F, None, "HANGUL SYLLABLE GGIGS", 0x31, "Hangul"),
    c(0xB080, None, "HANGUL SYLLABLE GGIN", 0x31, "Hangul"),
    c(0xB081, None, "HANGUL SYLLABLE GGINJ", 0x31, "Hangul"),
    c(0xB082, None, "HANGUL SYLLABLE GGINH", 0x31, "Hangul"),
    c(0xB083, None, "HANGUL SYLLABLE GGID", 0x31, "Hangul"),
    c(0xB084, None, "HANGUL SYLLABLE GGIL", 0x31, "Hangul"),
    c(0xB085, None, "HANGUL SYLLABLE GGILG", 0x31, "Hangul"),
    c(0xB086, None, "HANGUL SYLLABLE GGILM", 0x31, "Hangul"),
    c(0xB087, None, "HANGUL SYLLABLE GGILB", 0x31, "Hangul"),
    c(0xB088, None, "HANGUL SYLLABLE GGILS", 0x31, "Hangul"),
    c(0xB089, None, "HANGUL SYLLABLE GGILT", 0x31, "Hangul"),
    c(0xB08A, None, "HANGUL SYLLABLE GGILP", 0x31, "Hangul"),
    c(0xB08B, None, "HANGUL SYLLABLE GGILH", 0x31, "Hangul"),
    c(0xB08C, None, "HANGUL SYLLABLE GGIM", 0x31, "Hangul"),
    c(0xB08D, None, "HANGUL SYLLABLE GGIB", 0x31, "Hangul"),
    c(0xB08E, None, "HANGUL SYLLABLE GGIBS", 0x31, "Hangul"),
    c(0xB08F, None, "HANGUL SYLLABLE GGIS", 0x31, "Hangul"),
    c(0xB090, None, "HANGUL SYLLABLE GGISS", 0x31, "Hangul"),
    c(0xB091, None, "HANGUL SYLLABLE GGING", 0x31, "Hangul"),
    c(0xB092, None, "HANGUL SYLLABLE GGIJ", 0x31, "Hangul"),
    c(0xB093, None, "HANGUL SYLLABLE GGIC", 0x31, "Hangul"),
    c(0xB094, None, "HANGUL SYLLABLE GGIK", 0x31, "Hangul"),
    c(0xB095, None, "HANGUL SYLLABLE GGIT", 0x31, "Hangul"),
    c(0xB096, None, "HANGUL SYLLABLE GGIP", 0x31, "Hangul"),
    c(0xB097, None, "HANGUL SYLLABLE GGIH", 0x31, "Hangul"),
    c(0xB098, None, "HANGUL SYLLABLE NA", 0x31, "Hangul"),
    c(0xB099, None, "HANGUL SYLLABLE NAG", 0x31, "Hangul"),
    c(0xB09A, None, "HANGUL SYLLABLE NAGG", 0x31, "Hangul"),
    c(0xB09B, None, "HANGUL SYLLABLE NAGS", 0x31, "Hangul"),
    c(0xB09C, None, "HANGUL SYLLABLE NAN", 0x31, "Hangul"),
    c(0xB09D, None, "HANGUL SYLLABLE NANJ", 0x31, "Hangul"),
    c(0xB09E, None, "HANGUL SYLLABLE NANH", 0x31, "Hangul"),
    c(0xB09F, None, "HANGUL SYLLABLE NAD", 0x31, "Hangul"),
    c(0xB0A0, None, "HANGUL SYLLABLE NAL", 0x31, "Hangul"),
    c(0xB0A1, None, "HANGUL SYLLABLE NALG", 0x31, "Hangul"),
    c(0xB0A2, None, "HANGUL SYLLABLE NALM", 0x31, "Hangul"),
    c(0xB0A3, None, "HANGUL SYLLABLE NALB", 0x31, "Hangul"),
    c(0xB0A4, None, "HANGUL SYLLABLE NALS", 0x31, "Hangul"),
    c(0xB0A5, None, "HANGUL SYLLABLE NALT", 0x31, "Hangul"),
    c(0xB0A6, None, "HANGUL SYLLABLE NALP", 0x31, "Hangul"),
    c(0xB0A7, None, "HANGUL SYLLABLE NALH", 0x31, "Hangul"),
    c(0xB0A8, None, "HANGUL SYLLABLE NAM", 0x31, "Hangul"),
    c(0xB0A9, None, "HANGUL SYLLABLE NAB", 0x31, "Hangul"),
    c(0xB0AA, None, "HANGUL SYLLABLE NABS", 0x31, "Hangul"),
    c(0xB0AB, None, "HANGUL SYLLABLE NAS", 0x31, "Hangul"),
    c(0xB0AC, None, "HANGUL SYLLABLE NASS", 0x31, "Hangul"),
    c(0xB0AD, None, "HANGUL SYLLABLE NANG", 0x31, "Hangul"),
    c(0xB0AE, None, "HANGUL SYLLABLE NAJ", 0x31, "Hangul"),
    c(0xB0AF, None, "HANGUL SYLLABLE NAC", 0x31, "Hangul"),
    c(0xB0B0, None, "HANGUL SYLLABLE NAK", 0x31, "Hangul"),
    c(0xB0B1, None, "HANGUL SYLLABLE NAT", 0x31, "Hangul"),
    c(0xB0B2, None, "HANGUL SYLLABLE NAP", 0x31, "Hangul"),
    c(0xB0B3, None, "HANGUL SYLLABLE NAH", 0x31, "Hangul"),
    c(0xB0B4, None, "HANGUL SYLLABLE NAE", 0x31, "Hangul"),
    c(0xB0B5, None, "HANGUL SYLLABLE NAEG", 0x31, "Hangul"),
    c(0xB0B6, None, "HANGUL SYLLABLE NAEGG", 0x31, "Hangul"),
    c(0xB0B7, None, "HANGUL SYLLABLE NAEGS", 0x31, "Hangul"),
    c(0xB0B8, None, "HANGUL SYLLABLE NAEN", 0x31, "Hangul"),
    c(0xB0B9, None, "HANGUL SYLLABLE NAENJ", 0x31, "Hangul"),
    c(0xB0BA, None, "HANGUL SYLLABLE NAENH", 0x31, "Hangul"),
    c(0xB0BB, None, "HANGUL SYLLABLE NAED", 0x31, "Hangul"),
    c(0xB0BC, None, "HANGUL SYLLABLE NAEL", 0x31, "Hangul"),
    c(0xB0BD, None, "HANGUL SYLLABLE NAELG", 0x31, "Hangul"),
    c(0xB0BE, None, "HANGUL SYLLABLE NAELM", 0x31, "Hangul"),
    c(0xB0BF, None, "HANGUL SYLLABLE NAELB", 0x31, "Hangul"),
    c(0xB0C0, None, "HANGUL SYLLABLE NAELS", 0x31, "Hangul"),
    c(0xB0C1, None, "HANGUL SYLLABLE NAELT", 0x31, "Hangul"),
    c(0xB0C2, None, "HANGUL SYLLABLE NAELP", 0x31, "Hangul"),
    c(0xB0C3, None, "HANGUL SYLLABLE NAELH", 0x31, "Hangul"),
    c(0xB0C4, None, "HANGUL SYLLABLE NAEM", 0x31, "Hangul"),
    c(0xB0C5, None, "HANGUL SYLLABLE NAEB", 0x31, "Hangul"),
    c(0xB0C6, None, "HANGUL SYLLABLE NAEBS", 0x31, "Hangul"),
    c(0xB0C7, None, "HANGUL SYLLABLE NAES", 0x31, "Hangul"),
    c(0xB0C8, None, "HANGUL SYLLABLE NAESS", 0x31, "Hangul"),
    c(0xB0C9, None, "HANGUL SYLLABLE NAENG", 0x31, "Hangul"),
    c(0xB0CA, None, "HANGUL SYLLABLE NAEJ", 0x31, "Hangul"),
    c(0xB0CB, None, "HANGUL SYLLABLE NAEC", 0x31, "Hangul"),
    c(0xB0CC, None, "HANGUL SYLLABLE NAEK", 0x31, "Hangul"),
    c(0xB0CD, None, "HANGUL SYLLABLE NAET", 0x31, "Hangul"),
    c(0xB0CE, None, "HANGUL SYLLABLE NAEP", 0x31, "Hangul"),
    c(0xB0CF, None, "HANGUL SYLLABLE NAEH", 0x31, "Hangul"),
    c(0xB0D0, None, "HANGUL SYLLABLE NYA", 0x31, "Hangul"),
    c(0xB0D1, None, "HANGUL SYLLABLE NYAG", 0x31, "Hangul"),
    c(0xB0D2, None, "HANGUL SYLLABLE NYAGG", 0x31, "Hangul"),
    c(0xB0D3, None, "HANGUL SYLLABLE NYAGS", 0x31, "Hangul"),
    c(0xB0D4, None, "HANGUL SYLLABLE NYAN", 0x31, "Hangul"),
    c(0xB0D5, None, "HANGUL SYLLABLE NYANJ", 0x31, "Hangul"),
    c(0xB0D6, None, "HANGUL SYLLABLE NYANH", 0x31, "Hangul"),
    c(0xB0D7, None, "HANGUL SYLLABLE NYAD", 0x31, "Hangul"),
    c(0xB0D8, None, "HANGUL SYLLABLE NYAL", 0x31, "Hangul"),
    c(0xB0D9, None, "HANGUL SYLLABLE NYALG", 0x31, "Hangul"),
    c(0xB0DA, None, "HANGUL SYLLABLE NYALM", 0x31, "Hangul"),
    c(0xB0DB, None, "HANGUL SYLLABLE NYALB", 0x31, "Hangul"),
    c(0xB0DC, None, "HANGUL SYLLABLE NYALS", 0x31, "Hangul"),
    c(0xB0DD, None, "HANGUL SYLLABLE NYALT", 0x31, "Hangul"),
    c(0xB0DE, None, "HANGUL SYLLABLE NYALP", 0x31, "Hangul"),
    c(0xB0DF, None, "HANGUL SYLLABLE NYALH", 0x31, "Hangul"),
    c(0xB0E0, None, "HANGUL SYLLABLE NYAM", 0x31, "Hangul"),
    c(0xB0E1, None, "HANGUL SYLLABLE NYAB", 0x31, "Hangul"),
    c(0xB0E2, None, "HANGUL SYLLABLE NYABS", 0x31, "Hangul"),
    c(0xB0E3, None, "HANGUL SYLLABLE NYAS", 0x31, "Hangul"),
    c(0xB0E4, None, "HANGUL SYLLABLE NYASS", 0x31, "Hangul"),
    c(0xB0E5, None, "HANGUL SYLLABLE NYANG", 0x31, "Hangul"),
    c(0xB0E6, None, "HANGUL SYLLABLE NYAJ", 0x31, "Hangul"),
    c(0xB0E7, None, "HANGUL SYLLABLE NYAC", 0x31, "Hangul"),
    c(0xB0E8, None, "HANGUL SYLLABLE NYAK", 0x31, "Hangul"),
    c(0xB0E9, None, "HANGUL SYLLABLE NYAT", 0x31, "Hangul"),
    c(0xB0EA, None, "HANGUL SYLLABLE NYAP", 0x31, "Hangul"),
    c(0xB0EB, None, "HANGUL SYLLABLE NYAH", 0x31, "Hangul"),
    c(0xB0EC, None, "HANGUL SYLLABLE NYAE", 0x31, "Hangul"),
    c(0xB0ED, None, "HANGUL SYLLABLE NYAEG", 0x31, "Hangul"),
    c(0xB0EE, None, "HANGUL SYLLABLE NYAEGG", 0x31, "Hangul"),
    c(0xB0EF, None, "HANGUL SYLLABLE NYAEGS", 0x31, "Hangul"),
    c(0xB0F0, None, "HANGUL SYLLABLE NYAEN", 0x31, "Hangul"),
    c(0xB0F1, None, "HANGUL SYLLABLE NYAENJ", 0x31, "Hangul"),
    c(0xB0F2, None, "HANGUL SYLLABLE NYAENH", 0x31, "Hangul"),
    c(0xB0F3, None, "HANGUL SYLLABLE NYAED", 0x31, "Hangul"),
    c(0xB0F4, None, "HANGUL SYLLABLE NYAEL", 0x31, "Hangul"),
    c(0xB0F5, None, "HANGUL SYLLABLE NYAELG", 0x31, "Hangul"),
    c(0xB0F6, None, "HANGUL SYLLABLE NYAELM", 0x31, "Hangul"),
    c(0xB0F7, None, "HANGUL SYLLABLE NYAELB", 0x31, "Hangul"),
    c(0xB0F8, None, "HANGUL SYLLABLE NYAELS", 0x31, "Hangul"),
    c(0xB0F9, None, "HANGUL SYLLABLE NYAELT", 0x31, "Hangul"),
    c(0xB0FA, None, "HANGUL SYLLABLE NYAELP", 0x31, "Hangul"),
    c(0xB0FB, None, "HANGUL SYLLABLE NYAELH", 0x31, "Hangul"),
    c(0xB0FC, None, "HANGUL SYLLABLE NYAEM", 0x31, "Hangul"),
    c(0xB0FD, None, "HANGUL SYLLABLE NYAEB", 0x31, "Hangul"),
    c(0xB0FE, None, "HANGUL SYLLABLE NYAEBS", 0x31, "Hangul"),
    c(0xB0FF, None, "HANGUL SYLLABLE NYAES", 0x31, "Hangul"),
    c(0xB100, None, "HANGUL SYLLABLE NYAESS", 0x31, "Hangul"),
    c(0xB101, None, "HANGUL SYLLABLE NYAENG", 0x31, "Hangul"),
    c(0xB102, None, "HANGUL SYLLABLE NYAEJ", 0x31, "Hangul"),
    c(0xB103, None, "HANGUL SYLLABLE NYAEC", 0x31, "Hangul"),
    c(0xB104, None, "HANGUL SYLLABLE NYAEK", 0x31, "Hangul"),
    c(0xB105, None, "HANGUL SYLLABLE NYAET", 0x31, "Hangul"),
    c(0xB106, None, "HANGUL SYLLABLE NYAEP", 0x31, "Hangul"),
    c(0xB107, None, "HANGUL SYLLABLE NYAEH", 0x31, "Hangul"),
    c(0xB108, None, "HANGUL SYLLABLE NEO", 0x31, "Hangul"),
    c(0xB109, None, "HANGUL SYLLABLE NEOG", 0x31, "Hangul"),
    c(0xB10A, None, "HANGUL SYLLABLE NEOGG", 0x31, "Hangul"),
    c(0xB10B, None, "HANGUL SYLLABLE NEOGS", 0x31, "Hangul"),
    c(0xB10C, None, "HANGUL SYLLABLE NEON", 0x31, "Hangul"),
    c(0xB10D, None, "HANGUL SYLLABLE NEONJ", 0x31, "Hangul"),
    c(0xB10E, None, "HANGUL SYLLABLE NEONH", 0x31, "Hangul"),
    c(0xB10F, None, "HANGUL SYLLABLE NEOD", 0x31, "Hangul"),
    c(0xB110, None, "HANGUL SYLLABLE NEOL", 0x31, "Hangul"),
    c(0xB111, None, "HANGUL SYLLABLE NEOLG", 0x31, "Hangul"),
    c(0xB112, None, "HANGUL SYLLABLE NEOLM", 0x31, "Hangul"),
    c(0xB113, None, "HANGUL SYLLABLE NEOLB", 0x31, "Hangul"),
    c(0xB114, None, "HANGUL SYLLABLE NEOLS", 0x31, "Hangul"),
    c(0xB115, None, "HANGUL SYLLABLE NEOLT", 0x31, "Hangul"),
    c(0xB116, None, "HANGUL SYLLABLE NEOLP", 0x31, "Hangul"),
    c(0xB117, None, "HANGUL SYLLABLE NEOLH", 0x31, "Hangul"),
    c(0xB118, None, "HANGUL SYLLABLE NEOM", 0x31, "Hangul"),
    c(0xB119, None, "HANGUL SYLLABLE NEOB", 0x31, "Hangul"),
    c(0xB11A, None, "HANGUL SYLLABLE NEOBS", 0x31, "Hangul"),
    c(0xB11B, None, "HANGUL SYLLABLE NEOS", 0x31, "Hangul"),
    c(0xB11C, None, "HANGUL SYLLABLE NEOSS", 0x31, "Hangul"),
    c(0xB11D, None, "HANGUL SYLLABLE NEONG", 0x31, "Hangul"),
    c(0xB11E, None, "HANGUL SYLLABLE NEOJ", 0x31, "Hangul"),
    c(0xB11F, None, "HANGUL SYLLABLE NEOC", 0x31, "Hangul"),
    c(0xB120, None, "HANGUL SYLLABLE NEOK", 0x31, "Hangul"),
    c(0xB121, None, "HANGUL SYLLABLE NEOT", 0x31, "Hangul"),
    c(0xB122, None, "HANGUL SYLLABLE NEOP", 0x31, "Hangul"),
    c(0xB123, None, "HANGUL SYLLABLE NEOH", 0x31, "Hangul"),
    c(0xB124, None, "HANGUL SYLLABLE NE", 0x31, "Hangul"),
    c(0xB125, None, "HANGUL SYLLABLE NEG", 0x31, "Hangul"),
    c(0xB126, None, "HANGUL SYLLABLE NEGG", 0x31, "Hangul"),
    c(0xB127, None, "HANGUL SYLLABLE NEGS", 0x31, "Hangul"),
    c(0xB128, None, "HANGUL SYLLABLE NEN", 0x31, "Hangul"),
    c(0xB129, None, "HANGUL SYLLABLE NENJ", 0x31, "Hangul"),
    c(0xB12A, None, "HANGUL SYLLABLE NENH", 0x31, "Hangul"),
    c(0xB12B, None, "HANGUL SYLLABLE NED", 0x31, "Hangul"),
    c(0xB12C, None, "HANGUL SYLLABLE NEL", 0x31, "Hangul"),
    c(0xB12D, None, "HANGUL SYLLABLE NELG", 0x31, "Hangul"),
    c(0xB12E, None, "HANGUL SYLLABLE NELM", 0x31, "Hangul"),
    c(0xB12F, None, "HANGUL SYLLABLE NELB", 0x31, "Hangul"),
    c(0xB130, None, "HANGUL SYLLABLE NELS", 0x31, "Hangul"),
    c(0xB131, None, "HANGUL SYLLABLE NELT", 0x31, "Hangul"),
    c(0xB132, None, "HANGUL SYLLABLE NELP", 0x31, "Hangul"),
    c(0xB133, None, "HANGUL SYLLABLE NELH", 0x31, "Hangul"),
    c(0xB134, None, "HANGUL SYLLABLE NEM", 0x31, "Hangul"),
    c(0xB135, None, "HANGUL SYLLABLE NEB", 0x31, "Hangul"),
    c(0xB136, None, "HANGUL SYLLABLE NEBS", 0x31, "Hangul"),
    c(0xB137, None, "HANGUL SYLLABLE NES", 0x31, "Hangul"),
    c(0xB138, None, "HANGUL SYLLABLE NESS", 0x31, "Hangul"),
    c(0xB139, None, "HANGUL SYLLABLE NENG", 0x31, "Hangul"),
    c(0xB13A, None, "HANGUL SYLLABLE NEJ", 0x31, "Hangul"),
    c(0xB13B, None, "HANGUL SYLLABLE NEC", 0x31, "Hangul"),
    c(0xB13C, None, "HANGUL SYLLABLE NEK", 0x31, "Hangul"),
    c(0xB13D, None, "HANGUL SYLLABLE NET", 0x31, "Hangul"),
    c(0xB13E, None, "HANGUL SYLLABLE NEP", 0x31, "Hangul"),
    c(0xB13F, None, "HANGUL SYLLABLE NEH", 0x31, "Hangul"),
    c(0xB140, None, "HANGUL SYLLABLE NYEO", 0x31, "Hangul"),
    c(0xB141, None, "HANGUL SYLLABLE NYEOG", 0x31, "Hangul"),
    c(0xB142, None, "HANGUL SYLLABLE NYEOGG", 0x31, "Hangul"),
    c(0xB143, None, "HANGUL SYLLABLE NYEOGS", 0x31, "Hangul"),
    c(0xB144, None, "HANGUL SYLLABLE NYEON", 0x31, "Hangul"),
    c(0xB145, None, "HANGUL SYLLABLE NYEONJ", 0x31, "Hangul"),
    c(0xB146, None, "HANGUL SYLLABLE NYEONH", 0x31, "Hangul"),
    c(0xB147, None, "HANGUL SYLLABLE NYEOD", 0x31, "Hangul"),
    c(0xB148, None, "HANGUL SYLLABLE NYEOL", 0x31, "Hangul"),
    c(0xB149, None, "HANGUL SYLLABLE NYEOLG", 0x31, "Hangul"),
    c(0xB14A, None, "HANGUL SYLLABLE NYEOLM", 0x31, "Hangul"),
    c(0xB14B, None, "HANGUL SYLLABLE NYEOLB", 0x31, "Hangul"),
    c(0xB14C, None, "HANGUL SYLLABLE NYEOLS", 0x31, "Hangul"),
    c(0xB14D, None, "HANGUL SYLLABLE NYEOLT", 0x31, "Hangul"),
    c(0xB14E, None, "HANGUL SYLLABLE NYEOLP", 0x31, "Hangul"),
    c(0xB14F, None, "HANGUL SYLLABLE NYEOLH", 0x31, "Hangul"),
    c(0xB150, None, "HANGUL SYLLABLE NYEOM", 0x31, "Hangul"),
    c(0xB151, None, "HANGUL SYLLABLE NYEOB", 0x31, "Hangul"),
    c(0xB152, None, "HANGUL SYLLABLE NYEOBS", 0x31, "Hangul"),
    c(0xB153, None, "HANGUL SYLLABLE NYEOS", 0x31, "Hangul"),
    c(0xB154, None, "HANGUL SYLLABLE NYEOSS", 0x31, "Hangul"),
    c(0xB155, None, "HANGUL SYLLABLE NYEONG", 0x31, "Hangul"),
    c(0xB156, None, "HANGUL SYLLABLE NYEOJ", 0x31, "Hangul"),
    c(0xB157, None, "HANGUL SYLLABLE NYEOC", 0x31, "Hangul"),
    c(0xB158, None, "HANGUL SYLLABLE NYEOK", 0x31, "Hangul"),
    c(0xB159, None, "HANGUL SYLLABLE NYEOT", 0x31, "Hangul"),
    c(0xB15A, None, "HANGUL SYLLABLE NYEOP", 0x31, "Hangul"),
    c(0xB15B, None, "HANGUL SYLLABLE NYEOH", 0x31, "Hangul"),
    c(0xB15C, None, "HANGUL SYLLABLE NYE", 0x31, "Hangul"),
    c(0xB15D, None, "HANGUL SYLLABLE NYEG", 0x31, "Hangul"),
    c(0xB15E, None, "HANGUL SYLLABLE NYEGG", 0x31, "Hangul"),
    c(0xB15F, None, "HANGUL SYLLABLE NYEGS", 0x31, "Hangul"),
    c(0xB160, None, "HANGUL SYLLABLE NYEN", 0x31, "Hangul"),
    c(0xB161, None, "HANGUL SYLLABLE NYENJ", 0x31, "Hangul"),
    c(0xB162, None, "HANGUL SYLLABLE NYENH", 0x31, "Hangul"),
    c(0xB163, None, "HANGUL SYLLABLE NYED", 0x31, "Hangul"),
    c(0xB164, None, "HANGUL SYLLABLE NYEL", 0x31, "Hangul"),
    c(0xB165, None, "HANGUL SYLLABLE NYELG", 0x31, "Hangul"),
    c(0xB166, None, "HANGUL SYLLABLE NYELM", 0x31, "Hangul"),
    c(0xB167, None, "HANGUL SYLLABLE NYELB", 0x31, "Hangul"),
    c(0xB168, None, "HANGUL SYLLABLE NYELS", 0x31, "Hangul"),
    c(0xB169, None, "HANGUL SYLLABLE NYELT", 0x31, "Hangul"),
    c(0xB16A, None, "HANGUL SYLLABLE NYELP", 0x31, "Hangul"),
    c(0xB16B, None, "HANGUL SYLLABLE NYELH", 0x31, "Hangul"),
    c(0xB16C, None, "HANGUL SYLLABLE NYEM", 0x31, "Hangul"),
    c(0xB16D, None, "HANGUL SYLLABLE NYEB", 0x31, "Hangul"),
    c(0xB16E, None, "HANGUL SYLLABLE NYEBS", 0x31, "Hangul"),
    c(0xB16F, None, "HANGUL SYLLABLE NYES", 0x31, "Hangul"),
    c(0xB170, None, "HANGUL SYLLABLE NYESS", 0x31, "Hangul"),
    c(0xB171, None, "HANGUL SYLLABLE NYENG", 0x31, "Hangul"),
    c(0xB172, None, "HANGUL SYLLABLE NYEJ", 0x31, "Hangul"),
    c(0xB173, None, "HANGUL SYLLABLE NYEC", 0x31, "Hangul"),
    c(0xB174, None, "HANGUL SYLLABLE NYEK", 0x31, "Hangul"),
    c(0xB175, None, "HANGUL SYLLABLE NYET", 0x31, "Hangul"),
    c(0xB176, None, "HANGUL SYLLABLE NYEP", 0x31, "Hangul"),
    c(0xB177, None, "HANGUL SYLLABLE NYEH", 0x31, "Hangul"),
    c(0xB178, None, "HANGUL SYLLABLE NO", 0x31, "Hangul"),
    c(0xB179, None, "HANGUL SYLLABLE NOG", 0x31, "Hangul"),
    c(0xB17A, None, "HANGUL SYLLABLE NOGG", 0x31, "Hangul"),
    c(0xB17B, None, "HANGUL SYLLABLE NOGS", 0x31, "Hangul"),
    c(0xB17C, None, "HANGUL SYLLABLE NON", 0x31, "Hangul"),
    c(0xB17D, None, "HANGUL SYLLABLE NONJ", 0x31, "Hangul"),
    c(0xB17E, None, "HANGUL SYLLABLE NONH", 0x31, "Hangul"),
    c(0xB17F, None, "HANGUL SYLLABLE NOD", 0x31, "Hangul"),
    c(0xB180, None, "HANGUL SYLLABLE NOL", 0x31, "Hangul"),
    c(0xB181, None, "HANGUL SYLLABLE NOLG", 0x31, "Hangul"),
    c(0xB182, None, "HANGUL SYLLABLE NOLM", 0x31, "Hangul"),
    c(0xB183, None, "HANGUL SYLLABLE NOLB", 0x31, "Hangul"),
    c(0xB184, None, "HANGUL SYLLABLE NOLS", 0x31, "Hangul"),
    c(0xB185, None, "HANGUL SYLLABLE NOLT", 0x31, "Hangul"),
    c(0xB186, None, "HANGUL SYLLABLE NOLP", 0x31, "Hangul"),
    c(0xB187, None, "HANGUL SYLLABLE NOLH", 0x31, "Hangul"),
    c(0xB188, None, "HANGUL SYLLABLE NOM", 0x31, "Hangul"),
    c(0xB189, None, "HANGUL SYLLABLE NOB", 0x31, "Hangul"),
    c(0xB18A, None, "HANGUL SYLLABLE NOBS", 0x31, "Hangul"),
    c(0xB18B, None, "HANGUL SYLLABLE NOS", 0x31, "Hangul"),
    c(0xB18C, None, "HANGUL SYLLABLE NOSS", 0x31, "Hangul"),
    c(0xB18D, None, "HANGUL SYLLABLE NONG", 0x31, "Hangul"),
    c(0xB18E, None, "HANGUL SYLLABLE NOJ", 0x31, "Hangul"),
    c(0xB18F, None, "HANGUL SYLLABLE NOC", 0x31, "Hangul"),
    c(0xB190, None, "HANGUL SYLLABLE NOK", 0x31, "Hangul"),
    c(0xB191, None, "HANGUL SYLLABLE NOT", 0x31, "Hangul"),
    c(0xB192, None, "HANGUL SYLLABLE NOP", 0x31, "Hangul"),
    c(0xB193, None, "HANGUL SYLLABLE NOH", 0x31, "Hangul"),
    c(0xB194, None, "HANGUL SYLLABLE NWA", 0x31, "Hangul"),
    c(0xB195, None, "HANGUL SYLLABLE NWAG", 0x31, "Hangul"),
    c(0xB196, None, "HANGUL SYLLABLE NWAGG", 0x31, "Hangul"),
    c(0xB197, None, "HANGUL SYLLABLE NWAGS", 0x31, "Hangul"),
    c(0xB198, None, "HANGUL SYLLABLE NWAN", 0x31, "Hangul"),
    c(0xB199, None, "HANGUL SYLLABLE NWANJ", 0x31, "Hangul"),
    c(0xB19A, None, "HANGUL SYLLABLE NWANH", 0x31, "Hangul"),
    c(0xB19B, None, "HANGUL SYLLABLE NWAD", 0x31, "Hangul"),
    c(0xB19C, None, "HANGUL SYLLABLE NWAL", 0x31, "Hangul"),
    c(0xB19D, None, "HANGUL SYLLABLE NWALG", 0x31, "Hangul"),
    c(0xB19E, None, "HANGUL SYLLABLE NWALM", 0x31, "Hangul"),
    c(0xB19F, None, "HANGUL SYLLABLE NWALB", 0x31, "Hangul"),
    c(0xB1A0, None, "HANGUL SYLLABLE NWALS", 0x31, "Hangul"),
    c(0xB1A1, None, "HANGUL SYLLABLE NWALT", 0x31, "Hangul"),
    c(0xB1A2, None, "HANGUL SYLLABLE NWALP", 0x31, "Hangul"),
    c(0xB1A3, None, "HANGUL SYLLABLE NWALH", 0x31, "Hangul"),
    c(0xB1A4, None, "HANGUL SYLLABLE NWAM", 0x31, "Hangul"),
    c(0xB1A5, None, "HANGUL SYLLABLE NWAB", 0x31, "Hangul"),
    c(0xB1A6, None, "HANGUL SYLLABLE NWABS", 0x31, "Hangul"),
    c(0xB1A7, None, "HANGUL SYLLABLE NWAS", 0x31, "Hangul"),
    c(0xB1A8, None, "HANGUL SYLLABLE NWASS", 0x31, "Hangul"),
    c(0xB1A9, None, "HANGUL SYLLABLE NWANG", 0x31, "Hangul"),
    c(0xB1AA, None, "HANGUL SYLLABLE NWAJ", 0x31, "Hangul"),
    c(0xB1AB, None, "HANGUL SYLLABLE NWAC", 0x31, "Hangul"),
    c(0xB1AC, None, "HANGUL SYLLABLE NWAK", 0x31, "Hangul"),
    c(0xB1AD, None, "HANGUL SYLLABLE NWAT", 0x31, "Hangul"),
    c(0xB1AE, None, "HANGUL SYLLABLE NWAP", 0x31, "Hangul"),
    c(0xB1AF, None, "HANGUL SYLLABLE NWAH", 0x31, "Hangul"),
    c(0xB1B0, None, "HANGUL SYLLABLE NWAE", 0x31, "Hangul"),
    c(0xB1B1, None, "HANGUL SYLLABLE NWAEG", 0x31, "Hangul"),
    c(0xB1B2, None, "HANGUL SYLLABLE NWAEGG", 0x31, "Hangul"),
    c(0xB1B3, None, "HANGUL SYLLABLE NWAEGS", 0x31, "Hangul"),
    c(0xB1B4, None, "HANGUL SYLLABLE NWAEN", 0x31, "Hangul"),
    c(0xB1B5, None, "HANGUL SYLLABLE NWAENJ", 0x31, "Hangul"),
    c(0xB1B6, None, "HANGUL SYLLABLE NWAENH", 0x31, "Hangul"),
    c(0xB1B7, None, "HANGUL SYLLABLE NWAED", 0x31, "Hangul"),
    c(0xB1B8, None, "HANGUL SYLLABLE NWAEL", 0x31, "Hangul"),
    c(0xB1B9, None, "HANGUL SYLLABLE NWAELG", 0x31, "Hangul"),
    c(0xB1BA, None, "HANGUL SYLLABLE NWAELM", 0x31, "Hangul"),
    c(0xB1BB, None, "HANGUL SYLLABLE NWAELB", 0x31, "Hangul"),
    c(0xB1BC, None, "HANGUL SYLLABLE NWAELS", 0x31, "Hangul"),
    c(0xB1BD, None, "HANGUL SYLLABLE NWAELT", 0x31, "Hangul"),
    c(0xB1BE, None, "HANGUL SYLLABLE NWAELP", 0x31, "Hangul"),
    c(0xB1BF, None, "HANGUL SYLLABLE NWAELH", 0x31, "Hangul"),
    c(0xB1C0, None, "HANGUL SYLLABLE NWAEM", 0x31, "Hangul"),
    c(0xB1C1, None, "HANGUL SYLLABLE NWAEB", 0x31, "Hangul"),
    c(0xB1C2, None, "HANGUL SYLLABLE NWAEBS", 0x31, "Hangul"),
    c(0xB1C3, None, "HANGUL SYLLABLE NWAES", 0x31, "Hangul"),
    c(0xB1C4, None, "HANGUL SYLLABLE NWAESS", 0x31, "Hangul"),
    c(0xB1C5, None, "HANGUL SYLLABLE NWAENG", 0x31, "Hangul"),
    c(0xB1C6, None, "HANGUL SYLLABLE NWAEJ", 0x31, "Hangul"),
    c(0xB1C7, None, "HANGUL SYLLABLE NWAEC", 0x31, "Hangul"),
    c(0xB1C8, None, "HANGUL SYLLABLE NWAEK", 0x31, "Hangul"),
    c(0xB1C9, None, "HANGUL SYLLABLE NWAET", 0x31, "Hangul"),
    c(0xB1CA, None, "HANGUL SYLLABLE NWAEP", 0x31, "Hangul"),
    c(0xB1CB, None, "HANGUL SYLLABLE NWAEH", 0x31, "Hangul"),
    c(0xB1CC, None, "HANGUL SYLLABLE NOE", 0x31, "Hangul"),
    c(0xB1CD, None, "HANGUL SYLLABLE NOEG", 0x31, "Hangul"),
    c(0xB1CE, None, "HANGUL SYLLABLE NOEGG", 0x31, "Hangul"),
    c(0xB1CF, None, "HANGUL SYLLABLE NOEGS", 0x31, "Hangul"),
    c(0xB1D0, None, "HANGUL SYLLABLE NOEN", 0x31, "Hangul"),
    c(0xB1D1, None, "HANGUL SYLLABLE NOENJ", 0x31, "Hangul"),
    c(0xB1D2, None, "HANGUL SYLLABLE NOENH", 0x31, "Hangul"),
    c(0xB1D3, None, "HANGUL SYLLABLE NOED", 0x31, "Hangul"),
    c(0xB1D4, None, "HANGUL SYLLABLE NOEL", 0x31, "Hangul"),
    c(0xB1D5, None, "HANGUL SYLLABLE NOELG", 0x31, "Hangul"),
    c(0xB1D6, None, "HANGUL SYLLABLE NOELM", 0x31, "Hangul"),
    c(0xB1D7, None, "HANGUL SYLLABLE NOELB", 0x31, "Hangul"),
    c(0xB1D8, None, "HANGUL SYLLABLE NOELS", 0x31, "Hangul"),
    c(0xB1D9, None, "HANGUL SYLLABLE NOELT", 0x31, "Hangul"),
    c(0xB1DA, None, "HANGUL SYLLABLE NOELP", 0x31, "Hangul"),
    c(0xB1DB, None, "HANGUL SYLLABLE NOELH", 0x31, "Hangul"),
    c(0xB1DC, None, "HANGUL SYLLABLE NOEM", 0x31, "Hangul"),
    c(0xB1DD, None, "HANGUL SYLLABLE NOEB", 0x31, "Hangul"),
    c(0xB1DE, None, "HANGUL SYLLABLE NOEBS", 0x31, "Hangul"),
    c(0xB1DF, None, "HANGUL SYLLABLE NOES", 0x31, "Hangul"),
    c(0xB1E0, None, "HANGUL SYLLABLE NOESS", 0x31, "Hangul"),
    c(0xB1E1, None, "HANGUL SYLLABLE NOENG", 0x31, "Hangul"),
    c(0xB1E2, None, "HANGUL SYLLABLE NOEJ", 0x31, "Hangul"),
    c(0xB1E3, None, "HANGUL SYLLABLE NOEC", 0x31, "Hangul"),
    c(0xB1E4, None, "HANGUL SYLLABLE NOEK", 0x31, "Hangul"),
    c(0xB1E5, None, "HANGUL SYLLABLE NOET", 0x31, "Hangul"),
    c(0xB1E6, None, "HANGUL SYLLABLE NOEP", 0x31, "Hangul"),
    c(0xB1E7, None, "HANGUL SYLLABLE NOEH", 0x31, "Hangul"),
    c(0xB1E8, None, "HANGUL SYLLABLE NYO", 0x31, "Hangul"),
    c(0xB1E9, None, "HANGUL SYLLABLE NYOG", 0x31, "Hangul"),
    c(0xB1EA, None, "HANGUL SYLLABLE NYOGG", 0x31, "Hangul"),
    c(0xB1EB, None, "HANGUL SYLLABLE NYOGS", 0x31, "Hangul"),
    c(0xB1EC, None, "HANGUL SYLLABLE NYON", 0x31, "Hangul"),
    c(0xB1ED, None, "HANGUL SYLLABLE NYONJ", 0x31, "Hangul"),
    c(0xB1EE, None, "HANGUL SYLLABLE NYONH", 0x31, "Hangul"),
    c(0xB1EF, None, "HANGUL SYLLABLE NYOD", 0x31, "Hangul"),
    c(0xB1F0, None, "HANGUL SYLLABLE NYOL", 0x31, "Hangul"),
    c(0xB1F1, None, "HANGUL SYLLABLE NYOLG", 0x31, "Hangul"),
    c(0xB1F2, None, "HANGUL SYLLABLE NYOLM", 0x31, "Hangul"),
    c(0xB1F3, None, "HANGUL SYLLABLE NYOLB", 0x31, "Hangul"),
    c(0xB1F4, None, "HANGUL SYLLABLE NYOLS", 0x31, "Hangul"),
    c(0xB1F5, None, "HANGUL SYLLABLE NYOLT", 0x31, "Hangul"),
    c(0xB1F6, None, "HANGUL SYLLABLE NYOLP", 0x31, "Hangul"),
    c(0xB1F7, None, "HANGUL SYLLABLE NYOLH", 0x31, "Hangul"),
    c(0xB1F8, None, "HANGUL SYLLABLE NYOM", 0x31, "Hangul"),
    c(0xB1F9, None, "HANGUL SYLLABLE NYOB", 0x31, "Hangul"),
    c(0xB1FA, None, "HANGUL SYLLABLE NYOBS", 0x31, "Hangul"),
    c(0xB1FB, None, "HANGUL SYLLABLE NYOS", 0x31, "Hangul"),
    c(0xB1FC, None, "HANGUL SYLLABLE NYOSS", 0x31, "Hangul"),
    c(0xB1FD, None, "HANGUL SYLLABLE NYONG", 0x31, "Hangul"),
    c(0xB1FE, None, "HANGUL SYLLABLE NYOJ", 0x31, "Hangul"),
    c(0xB1FF, None, "HANGUL SYLLABLE NYOC", 0x31, "Hangul"),
    c(0xB200, None, "HANGUL SYLLABLE NYOK", 0x31, "Hangul"),
    c(0xB201, None, "HANGUL SYLLABLE NYOT", 0x31, "Hangul"),
    c(0xB202, None, "HANGUL SYLLABLE NYOP", 0x31, "Hangul"),
    c(0xB203, None, "HANGUL SYLLABLE NYOH", 0x31, "Hangul"),
    c(0xB204, None, "HANGUL SYLLABLE NU", 0x31, "Hangul"),
    c(0xB205, None, "HANGUL SYLLABLE NUG", 0x31, "Hangul"),
    c(0xB206, None, "HANGUL SYLLABLE NUGG", 0x31, "Hangul"),
    c(0xB207, None, "HANGUL SYLLABLE NUGS", 0x31, "Hangul"),
    c(0xB208, None, "HANGUL SYLLABLE NUN", 0x31, "Hangul"),
    c(0xB209, None, "HANGUL SYLLABLE NUNJ", 0x31, "Hangul"),
    c(0xB20A, None, "HANGUL SYLLABLE NUNH", 0x31, "Hangul"),
    c(0xB20B, None, "HANGUL SYLLABLE NUD", 0x31, "Hangul"),
    c(0xB20C, None, "HANGUL SYLLABLE NUL", 0x31, "Hangul"),
    c(0xB20D, None, "HANGUL SYLLABLE NULG", 0x31, "Hangul"),
    c(0xB20E, None, "HANGUL SYLLABLE NULM", 0x31, "Hangul"),
    c(0xB20F, None, "HANGUL SYLLABLE NULB", 0x31, "Hangul"),
    c(0xB210, None, "HANGUL SYLLABLE NULS", 0x31, "Hangul"),
    c(0xB211, None, "HANGUL SYLLABLE NULT", 0x31, "Hangul"),
    c(0xB212, None, "HANGUL SYLLABLE NULP", 0x31, "Hangul"),
    c(0xB213, None, "HANGUL SYLLABLE NULH", 0x31, "Hangul"),
    c(0xB214, None, "HANGUL SYLLABLE NUM", 0x31, "Hangul"),
    c(0xB215, None, "HANGUL SYLLABLE NUB", 0x31, "Hangul"),
    c(0xB216, None, "HANGUL SYLLABLE NUBS", 0x31, "Hangul"),
    c(0xB217, None, "HANGUL SYLLABLE NUS", 0x31, "Hangul"),
    c(0xB218, None, "HANGUL SYLLABLE NUSS", 0x31, "Hangul"),
    c(0xB219, None, "HANGUL SYLLABLE NUNG", 0x31, "Hangul"),
    c(0xB21A, None, "HANGUL SYLLABLE NUJ", 0x31, "Hangul"),
    c(0xB21B, None, "HANGUL SYLLABLE NUC", 0x31, "Hangul"),
    c(0xB21C, None, "HANGUL SYLLABLE NUK", 0x31, "Hangul"),
    c(0xB21D, None, "HANGUL SYLLABLE NUT", 0x31, "Hangul"),
    c(0xB21E, None, "HANGUL SYLLABLE NUP", 0x31, "Hangul"),
    c(0xB21F, None, "HANGUL SYLLABLE NUH", 0x31, "Hangul"),
    c(0xB220, None, "HANGUL SYLLABLE NWEO", 0x31, "Hangul"),
    c(0xB221, None, "HANGUL SYLLABLE NWEOG", 0x31, "Hangul"),
    c(0xB222, None, "HANGUL SYLLABLE NWEOGG", 0x31, "Hangul"),
    c(0xB223, None, "HANGUL SYLLABLE NWEOGS", 0x31, "Hangul"),
    c(0xB224, None, "HANGUL SYLLABLE NWEON", 0x31, "Hangul"),
    c(0xB225, None, "HANGUL SYLLABLE NWEONJ", 0x31, "Hangul"),
    c(0xB226, None, "HANGUL SYLLABLE NWEONH", 0x31, "Hangul"),
    c(0xB227, None, "HANGUL SYLLABLE NWEOD", 0x31, "Hangul"),
    c(0xB228, None, "HANGUL SYLLABLE NWEOL", 0x31, "Hangul"),
    c(0xB229, None, "HANGUL SYLLABLE NWEOLG", 0x31, "Hangul"),
    c(0xB22A, None, "HANGUL SYLLABLE NWEOLM", 0x31, "Hangul"),
    c(0xB22B, None, "HANGUL SYLLABLE NWEOLB", 0x31, "Hangul"),
    c(0xB22C, None, "HANGUL SYLLABLE NWEOLS", 0x31, "Hangul"),
    c(0xB22D, None, "HANGUL SYLLABLE NWEOLT", 0x31, "Hangul"),
    c(0xB22E, None, "HANGUL SYLLABLE NWEOLP", 0x31, "Hangul"),
    c(0xB22F, None, "HANGUL SYLLABLE NWEOLH", 0x31, "Hangul"),
    c(0xB230, None, "HANGUL SYLLABLE NWEOM", 0x31, "Hangul"),
    c(0xB231, None, "HANGUL SYLLABLE NWEOB", 0x31, "Hangul"),
    c(0xB232, None, "HANGUL SYLLABLE NWEOBS", 0x31, "Hangul"),
    c(0xB233, None, "HANGUL SYLLABLE NWEOS", 0x31, "Hangul"),
    c(0xB234, None, "HANGUL SYLLABLE NWEOSS", 0x31, "Hangul"),
    c(0xB235, None, "HANGUL SYLLABLE NWEONG", 0x31, "Hangul"),
    c(0xB236, None, "HANGUL SYLLABLE NWEOJ", 0x31, "Hangul"),
    c(0xB237, None, "HANGUL SYLLABLE NWEOC", 0x31, "Hangul"),
    c(0xB238, None, "HANGUL SYLLABLE NWEOK", 0x31, "Hangul"),
    c(0xB239, None, "HANGUL SYLLABLE NWEOT", 0x31, "Hangul"),
    c(0xB23A, None, "HANGUL SYLLABLE NWEOP", 0x31, "Hangul"),
    c(0xB23B, None, "HANGUL SYLLABLE NWEOH", 0x31, "Hangul"),
    c(0xB23C, None, "HANGUL SYLLABLE NWE", 0x31, "Hangul"),
    c(0xB23D, None, "HANGUL SYLLABLE NWEG", 0x31, "Hangul"),
    c(0xB23E, None, "HANGUL SYLLABLE NWEGG", 0x31, "Hangul"),
    c(0xB23F, None, "HANGUL SYLLABLE NWEGS", 0x31, "Hangul"),
    c(0xB240, None, "HANGUL SYLLABLE NWEN", 0x31, "Hangul"),
    c(0xB241, None, "HANGUL SYLLABLE NWENJ", 0x31, "Hangul"),
    c(0xB242, None, "HANGUL SYLLABLE NWENH", 0x31, "Hangul"),
    c(0xB243, None, "HANGUL SYLLABLE NWED", 0x31, "Hangul"),
    c(0xB244, None, "HANGUL SYLLABLE NWEL", 0x31, "Hangul"),
    c(0xB245, None, "HANGUL SYLLABLE NWELG", 0x31, "Hangul"),
    c(0xB246, None, "HANGUL SYLLABLE NWELM", 0x31, "Hangul"),
    c(0xB247, None, "HANGUL SYLLABLE NWELB", 0x31, "Hangul"),
    c(0xB248, None, "HANGUL SYLLABLE NWELS", 0x31, "Hangul"),
    c(0xB249, None, "HANGUL SYLLABLE NWELT", 0x31, "Hangul"),
    c(0xB24A, None, "HANGUL SYLLABLE NWELP", 0x31, "Hangul"),
    c(0xB24B, None, "HANGUL SYLLABLE NWELH", 0x31, "Hangul"),
    c(0xB24C, None, "HANGUL SYLLABLE NWEM", 0x31, "Hangul"),
    c(0xB24D, None, "HANGUL SYLLABLE NWEB", 0x31, "Hangul"),
    c(0xB24E, None, "HANGUL SYLLABLE NWEBS", 0x31, "Hangul"),
    c(0xB24F, None, "HANGUL SYLLABLE NWES", 0x31, "Hangul"),
    c(0xB250, None, "HANGUL SYLLABLE NWESS", 0x31, "Hangul"),
    c(0xB251, None, "HANGUL SYLLABLE NWENG", 0x31, "Hangul"),
    c(0xB252, None, "HANGUL SYLLABLE NWEJ", 0x31, "Hangul"),
    c(0xB253, None, "HANGUL SYLLABLE NWEC", 0x31, "Hangul"),
    c(0xB254, None, "HANGUL SYLLABLE NWEK", 0x31, "Hangul"),
    c(0xB255, None, "HANGUL SYLLABLE NWET", 0x31, "Hangul"),
    c(0xB256, None, "HANGUL SYLLABLE NWEP", 0x31, "Hangul"),
    c(0xB257, None, "HANGUL SYLLABLE NWEH", 0x31, "Hangul"),
    c(0xB258, None, "HANGUL SYLLABLE NWI", 0x31, "Hangul"),
    c(0xB259, None, "HANGUL SYLLABLE NWIG", 0x31, "Hangul"),
    c(0xB25A, None, "HANGUL SYLLABLE NWIGG", 0x31, "Hangul"),
    c(0xB25B, None, "HANGUL SYLLABLE NWIGS", 0x31, "Hangul"),
    c(0xB25C, None, "HANGUL SYLLABLE NWIN", 0x31, "Hangul"),
    c(0xB25D, None, "HANGUL SYLLABLE NWINJ", 0x31, "Hangul"),
    c(0xB25E, None, "HANGUL SYLLABLE NWINH", 0x31, "Hangul"),
    c(0xB25F, None, "HANGUL SYLLABLE NWID", 0x31, "Hangul"),
    c(0xB260, None, "HANGUL SYLLABLE NWIL", 0x31, "Hangul"),
    c(0xB261, None, "HANGUL SYLLABLE NWILG", 0x31, "Hangul"),
    c(0xB262, None, "HANGUL SYLLABLE NWILM", 0x31, "Hangul"),
    c(0xB263, None, "HANGUL SYLLABLE NWILB", 0x31, "Hangul"),
    c(0xB264, None, "HANGUL SYLLABLE NWILS", 0x31, "Hangul"),
    c(0xB265, None, "HANGUL SYLLABLE NWILT", 0x31, "Hangul"),
    c(0xB266, None, "HANGUL SYLLABLE NWILP", 0x31, "Hangul"),
    c(0xB267, None, "HANGUL SYLLABLE NWILH", 0x31, "Hangul"),
    c(0xB268, None, "HANGUL SYLLABLE NWIM", 0x31, "Hangul"),
    c(0xB269, None, "HANGUL SYLLABLE NWIB", 0x31, "Hangul"),
    c(0xB26A, None, "HANGUL SYLLABLE NWIBS", 0x31, "Hangul"),
    c(0xB26B, None, "HANGUL SYLLABLE NWIS", 0x31, "Hangul"),
    c(0xB26C, None, "HANGUL SYLLABLE NWISS", 0x31, "Hangul"),
    c(0xB26D, None, "HANGUL SYLLABLE NWING", 0x31, "Hangul"),
    c(0xB26E, None, "HANGUL SYLLABLE NWIJ", 0x31, "Hangul"),
    c(0xB26F, None, "HANGUL SYLLABLE NWIC", 0x31, "Hangul"),
    c(0xB270, None, "HANGUL SYLLABLE NWIK", 0x31, "Hangul"),
    c(0xB271, None, "HANGUL SYLLABLE NWIT", 0x31, "Hangul"),
    c(0xB272, None, "HANGUL SYLLABLE NWIP", 0x31, "Hangul"),
    c(0xB273, None, "HANGUL SYLLABLE NWIH", 0x31, "Hangul"),
    c(0xB274, None, "HANGUL SYLLABLE NYU", 0x31, "Hangul"),
    c(0xB275, None, "HANGUL SYLLABLE NYUG", 0x31, "Hangul"),
    c(0xB276, None, "HANGUL SYLLABLE NYUGG", 0x31, "Hangul"),
    c(0xB277, None, "HANGUL SYLLABLE NYUGS", 0x31, "Hangul"),
    c(0xB278, None, "HANGUL SYLLABLE NYUN", 0x31, "Hangul"),
    c(0xB279, None, "HANGUL SYLLABLE NYUNJ", 0x31, "Hangul"),
    c(0xB27A, None, "HANGUL SYLLABLE NYUNH", 0x31, "Hangul"),
    c(0xB27B, None, "HANGUL SYLLABLE NYUD", 0x31, "Hangul"),
    c(0xB27C, None, "HANGUL SYLLABLE NYUL", 0x31, "Hangul"),
    c(0xB27D, None, "HANGUL SYLLABLE NYULG", 0x31, "Hangul"),
    c(0xB27E, None, "HANGUL SYLLABLE NYULM", 0x31, "Hangul"),
    c(0xB27F, None, "HANGUL SYLLABLE NYULB", 0x31, "Hangul"),
    c(0xB280, None, "HANGUL SYLLABLE NYULS", 0x31, "Hangul"),
    c(0xB281, None, "HANGUL SYLLABLE NYULT", 0x31, "Hangul"),
    c(0xB282, None, "HANGUL SYLLABLE NYULP", 0x31, "Hangul"),
    c(0xB283, None, "HANGUL SYLLABLE NYULH", 0x31, "Hangul"),
    c(0xB284, None, "HANGUL SYLLABLE NYUM", 0x31, "Hangul"),
    c(0xB285, None, "HANGUL SYLLABLE NYUB", 0x31, "Hangul"),
    c(0xB286, None, "HANGUL SYLLABLE NYUBS", 0x31, "Hangul"),
    c(0xB287, None, "HANGUL SYLLABLE NYUS", 0x31, "Hangul"),
    c(0xB288, None, "HANGUL SYLLABLE NYUSS", 0x31, "Hangul"),
    c(0xB289, None, "HANGUL SYLLABLE NYUNG", 0x31, "Hangul"),
    c(0xB28A, None, "HANGUL SYLLABLE NYUJ", 0x31, "Hangul"),
    c(0xB28B, None, "HANGUL SYLLABLE NYUC", 0x31, "Hangul"),
    c(0xB28C, None, "HANGUL SYLLABLE NYUK", 0x31, "Hangul"),
    c(0xB28D, None, "HANGUL SYLLABLE NYUT", 0x31, "Hangul"),
    c(0xB28E, None, "HANGUL SYLLABLE NYUP", 0x31, "Hangul"),
    c(0xB28F, None, "HANGUL SYLLABLE NYUH", 0x31, "Hangul"),
    c(0xB290, None, "HANGUL SYLLABLE NEU", 0x31, "Hangul"),
    c(0xB291, None, "HANGUL SYLLABLE NEUG", 0x31, "Hangul"),
    c(0xB292, None, "HANGUL SYLLABLE NEUGG", 0x31, "Hangul"),
    c(0xB293, None, "HANGUL SYLLABLE NEUGS", 0x31, "Hangul"),
    c(0xB294, None, "HANGUL SYLLABLE NEUN", 0x31, "Hangul"),
    c(0xB295, None, "HANGUL SYLLABLE NEUNJ", 0x31, "Hangul"),
    c(0xB296, None, "HANGUL SYLLABLE NEUNH", 0x31, "Hangul"),
    c(0xB297, None, "HANGUL SYLLABLE NEUD", 0x31, "Hangul"),
    c(0xB298, None, "HANGUL SYLLABLE NEUL", 0x31, "Hangul"),
    c(0xB299, None, "HANGUL SYLLABLE NEULG", 0x31, "Hangul"),
    c(0xB29A, None, "HANGUL SYLLABLE NEULM", 0x31, "Hangul"),
    c(0xB29B, None, "HANGUL SYLLABLE NEULB", 0x31, "Hangul"),
    c(0xB29C, None, "HANGUL SYLLABLE NEULS", 0x31, "Hangul"),
    c(0xB29D, None, "HANGUL SYLLABLE NEULT", 0x31, "Hangul"),
    c(0xB29E, None, "HANGUL SYLLABLE NEULP", 0x31, "Hangul"),
    c(0xB29F, None, "HANGUL SYLLABLE NEULH", 0x31, "Hangul"),
    c(0xB2A0, None, "HANGUL SYLLABLE NEUM", 0x31, "Hangul"),
    c(0xB2A1, None, "HANGUL SYLLABLE NEUB", 0x31, "Hangul"),
    c(0xB2A2, None, "HANGUL SYLLABLE NEUBS", 0x31, "Hangul"),
    c(0xB2A3, None, "HANGUL SYLLABLE NEUS", 0x31, "Hangul"),
    c(0xB2A4, None, "HANGUL SYLLABLE NEUSS", 0x31, "Hangul"),
    c(0xB2A5, None, "HANGUL SYLLABLE NEUNG", 0x31, "Hangul"),
    c(0xB2A6, None, "HANGUL SYLLABLE NEUJ", 0x31, "Hangul"),
    c(0xB2A7, None, "HANGUL SYLLABLE NEUC", 0x31, "Hangul"),
    c(0xB2A8, None, "HANGUL SYLLABLE NEUK", 0x31, "Hangul"),
    c(0xB2A9, None, "HANGUL SYLLABLE NEUT", 0x31, "Hangul"),
    c(0xB2AA, None, "HANGUL SYLLABLE NEUP", 0x31, "Hangul"),
    c(0xB2AB, None, "HANGUL SYLLABLE NEUH", 0x31, "Hangul"),
    c(0xB2AC, None, "HANGUL SYLLABLE NYI", 0x31, "Hangul"),
    c(0xB2AD, None, "HANGUL SYLLABLE NYIG", 0x31, "Hangul"),
    c(0xB2AE, None, "HANGUL SYLLABLE NYIGG", 0x31, "Hangul"),
    c(0xB2AF, None, "HANGUL SYLLABLE NYIGS", 0x31, "Hangul"),
    c(0xB2B0, None, "HANGUL SYLLABLE NYIN", 0x31, "Hangul"),
    c(0xB2B1, None, "HANGUL SYLLABLE NYINJ", 0x31, "Hangul"),
    c(0xB2B2, None, "HANGUL SYLLABLE NYINH", 0x31, "Hangul"),
    c(0xB2B3, None, "HANGUL SYLLABLE NYID", 0x31, "Hangul"),
    c(0xB2B4, None, "HANGUL SYLLABLE NYIL", 0x31, "Hangul"),
    c(0xB2B5, None, "HANGUL SYLLABLE NYILG", 0x31, "Hangul"),
    c(0xB2B6, None, "HANGUL SYLLABLE NYILM", 0x31, "Hangul"),
    c(0xB2B7, None, "HANGUL SYLLABLE NYILB", 0x31, "Hangul"),
    c(0xB2B8, None, "HANGUL SYLLABLE NYILS", 0x31, "Hangul"),
    c(0xB2B9, None, "HANGUL SYLLABLE NYILT", 0x31, "Hangul"),
    c(0xB2BA, None, "HANGUL SYLLABLE NYILP", 0x31, "Hangul"),
    c(0xB2BB, None, "HANGUL SYLLABLE NYILH", 0x31, "Hangul"),
    c(0xB2BC, None, "HANGUL SYLLABLE NYIM", 0x31, "Hangul"),
    c(0xB2BD, None, "HANGUL SYLLABLE NYIB", 0x31, "Hangul"),
    c(0xB2BE, None, "HANGUL SYLLABLE NYIBS", 0x31, "Hangul"),
    c(0xB2BF, None, "HANGUL SYLLABLE NYIS", 0x31, "Hangul"),
    c(0xB2C0, None, "HANGUL SYLLABLE NYISS", 0x31, "Hangul"),
    c(0xB2C1, None, "HANGUL SYLLABLE NYING", 0x31, "Hangul"),
    c(0xB2C2, None, "HANGUL SYLLABLE NYIJ", 0x31, "Hangul"),
    c(0xB2C3, None, "HANGUL SYLLABLE NYIC", 0x31, "Hangul"),
    c(0xB2C4, None, "HANGUL SYLLABLE NYIK", 0x31, "Hangul"),
    c(0xB2C5, None, "HANGUL SYLLABLE NYIT", 0x31, "Hangul"),
    c(0xB2C6, None, "HANGUL SYLLABLE NYIP", 0x31, "Hangul"),
    c(0xB2C7, None, "HANGUL SYLLABLE NYIH", 0x31, "Hangul"),
    c(0xB2C8, None, "HANGUL SYLLABLE NI", 0x31, "Hangul"),
    c(0xB2C9, None, "HANGUL SYLLABLE NIG", 0x31, "Hangul"),
    c(0xB2CA, None, "HANGUL SYLLABLE NIGG", 0x31, "Hangul"),
    c(0xB2CB, None, "HANGUL SYLLABLE NIGS", 0x31, "Hangul"),
    c(0xB2CC, None, "HANGUL SYLLABLE NIN", 0x31, "Hangul"),
    c(0xB2CD, None, "HANGUL SYLLABLE NINJ", 0x31, "Hangul"),
    c(0xB2CE, None, "HANGUL SYLLABLE NINH", 0x31, "Hangul"),
    c(0xB2CF, None, "HANGUL SYLLABLE NID", 0x31, "Hangul"),
    c(0xB2D0, None, "HANGUL SYLLABLE NIL", 0x31, "Hangul"),
    c(0xB2D1, None, "HANGUL SYLLABLE NILG", 0x31, "Hangul"),
    c(0xB2D2, None, "HANGUL SYLLABLE NILM", 0x31, "Hangul"),
    c(0xB2D3, None, "HANGUL SYLLABLE NILB", 0x31, "Hangul"),
    c(0xB2D4, None, "HANGUL SYLLABLE NILS", 0x31, "Hangul"),
    c(0xB2D5, None, "HANGUL SYLLABLE NILT", 0x31, "Hangul"),
    c(0xB2D6, None, "HANGUL SYLLABLE NILP", 0x31, "Hangul"),
    c(0xB2D7, None, "HANGUL SYLLABLE NILH", 0x31, "Hangul"),
    c(0xB2D8, None, "HANGUL SYLLABLE NIM", 0x31, "Hangul"),
    c(0xB2D9, None, "HANGUL SYLLABLE NIB", 0x31, "Hangul"),
    c(0xB2DA, None, "HANGUL SYLLABLE NIBS", 0x31, "Hangul"),
    c(0xB2DB, None, "HANGUL SYLLABLE NIS", 0x31, "Hangul"),
    c(0xB2DC, None, "HANGUL SYLLABLE NISS", 0x31, "Hangul"),
    c(0xB2DD, None, "HANGUL SYLLABLE NING", 0x31, "Hangul"),
    c(0xB2DE, None, "HANGUL SYLLABLE NIJ", 0x31, "Hangul"),
    c(0xB2DF, None, "HANGUL SYLLABLE NIC", 0x31, "Hangul"),
    c(0xB2E0, None, "HANGUL SYLLABLE NIK", 0x31, "Hangul"),
    c(0xB2E1, None, "HANGUL SYLLABLE NIT", 0x31, "Hangul"),
    c(0xB2E2, None, "HANGUL SYLLABLE NIP", 0x31, "Hangul"),
    c(0xB2E3, None, "HANGUL SYLLABLE NIH", 0x31, "Hangul"),
    c(0xB2E4, None, "HANGUL SYLLABLE DA", 0x31, "Hangul"),
    c(0xB2E5, None, "HANGUL SYLLABLE DAG", 0x31, "Hangul"),
    c(0xB2E6, None, "HANGUL SYLLABLE DAGG", 0x31, "Hangul"),
    c(0xB2E7, None, "HANGUL SYLLABLE DAGS", 0x31, "Hangul"),
    c(0xB2E8, None, "HANGUL SYLLABLE DAN", 0x31, "Hangul"),
    c(0xB2E9, None, "HANGUL SYLLABLE DANJ", 0x31, "Hangul"),
    c(0xB2EA, None, "HANGUL SYLLABLE DANH", 0x31, "Hangul"),
    c(0xB2EB, None, "HANGUL SYLLABLE DAD", 0x31, "Hangul"),
    c(0xB2EC, None, "HANGUL SYLLABLE DAL", 0x31, "Hangul"),
    c(0xB2ED, None, "HANGUL SYLLABLE DALG", 0x31, "Hangul"),
    c(0xB2EE, None, "HANGUL SYLLABLE DALM", 0x31, "Hangul"),
    c(0xB2EF, None, "HANGUL SYLLABLE DALB", 0x31, "Hangul"),
    c(0xB2F0, None, "HANGUL SYLLABLE DALS", 0x31, "Hangul"),
    c(0xB2F1, None, "HANGUL SYLLABLE DALT", 0x31, "Hangul"),
    c(0xB2F2, None, "HANGUL SYLLABLE DALP", 0x31, "Hangul"),
    c(0xB2F3, None, "HANGUL SYLLABLE DALH", 0x31, "Hangul"),
    c(0xB2F4, None, "HANGUL SYLLABLE DAM", 0x31, "Hangul"),
    c(0xB2F5, None, "HANGUL SYLLABLE DAB", 0x31, "Hangul"),
    c(0xB2F6, None, "HANGUL SYLLABLE DABS", 0x31, "Hangul"),
    c(0xB2F7, None, "HANGUL SYLLABLE DAS", 0x31, "Hangul"),
    c(0xB2F8, None, "HANGUL SYLLABLE DASS", 0x31, "Hangul"),
    c(0xB2F9, None, "HANGUL SYLLABLE DANG", 0x31, "Hangul"),
    c(0xB2FA, None, "HANGUL SYLLABLE DAJ", 0x31, "Hangul"),
    c(0xB2FB, None, "HANGUL SYLLABLE DAC", 0x31, "Hangul"),
    c(0xB2FC, None, "HANGUL SYLLABLE DAK", 0x31, "Hangul"),
    c(0xB2FD, None, "HANGUL SYLLABLE DAT", 0x31, "Hangul"),
    c(0xB2FE, None, "HANGUL SYLLABLE DAP", 0x31, "Hangul"),
    c(0xB2FF, None, "HANGUL SYLLABLE DAH", 0x31, "Hangul"),
    c(0xB300, None, "HANGUL SYLLABLE DAE", 0x31, "Hangul"),
    c(0xB301, None, "HANGUL SYLLABLE DAEG", 0x31, "Hangul"),
    c(0xB302, None, "HANGUL SYLLABLE DAEGG", 0x31, "Hangul"),
    c(0xB303, None, "HANGUL SYLLABLE DAEGS", 0x31, "Hangul"),
    c(0xB304, None, "HANGUL SYLLABLE DAEN", 0x31, "Hangul"),
    c(0xB305, None, "HANGUL SYLLABLE DAENJ", 0x31, "Hangul"),
    c(0xB306, None, "HANGUL SYLLABLE DAENH", 0x31, "Hangul"),
    c(0xB307, None, "HANGUL SYLLABLE DAED", 0x31, "Hangul"),
    c(0xB308, None, "HANGUL SYLLABLE DAEL", 0x31, "Hangul"),
    c(0xB309, None, "HANGUL SYLLABLE DAELG", 0x31, "Hangul"),
    c(0xB30A, None, "HANGUL SYLLABLE DAELM", 0x31, "Hangul"),
    c(0xB30B, None, "HANGUL SYLLABLE DAELB", 0x31, "Hangul"),
    c(0xB30C, None, "HANGUL SYLLABLE DAELS", 0x31, "Hangul"),
    c(0xB30D, None, "HANGUL SYLLABLE DAELT", 0x31, "Hangul"),
    c(0xB30E, None, "HANGUL SYLLABLE DAELP", 0x31, "Hangul"),
    c(0xB30F, None, "HANGUL SYLLABLE DAELH", 0x31, "Hangul"),
    c(0xB310, None, "HANGUL SYLLABLE DAEM", 0x31, "Hangul"),
    c(0xB311, None, "HANGUL SYLLABLE DAEB", 0x31, "Hangul"),
    c(0xB312, None, "HANGUL SYLLABLE DAEBS", 0x31, "Hangul"),
    c(0xB313, None, "HANGUL SYLLABLE DAES", 0x31, "Hangul"),
    c(0xB314, None, "HANGUL SYLLABLE DAESS", 0x31, "Hangul"),
    c(0xB315, None, "HANGUL SYLLABLE DAENG", 0x31, "Hangul"),
    c(0xB316, None, "HANGUL SYLLABLE DAEJ", 0x31, "Hangul"),
    c(0xB317, None, "HANGUL SYLLABLE DAEC", 0x31, "Hangul"),
    c(0xB318, None, "HANGUL SYLLABLE DAEK", 0x31, "Hangul"),
    c(0xB319, None, "HANGUL SYLLABLE DAET", 0x31, "Hangul"),
    c(0xB31A, None, "HANGUL SYLLABLE DAEP", 0x31, "Hangul"),
    c(0xB31B, None, "HANGUL SYLLABLE DAEH", 0x31, "Hangul"),
    c(0xB31C, None, "HANGUL SYLLABLE DYA", 0x31, "Hangul"),
    c(0xB31D, None, "HANGUL SYLLABLE DYAG", 0x31, "Hangul"),
    c(0xB31E, None, "HANGUL SYLLABLE DYAGG", 0x31, "Hangul"),
    c(0xB31F, None, "HANGUL SYLLABLE DYAGS", 0x31, "Hangul"),
    c(0xB320, None, "HANGUL SYLLABLE DYAN", 0x31, "Hangul"),
    c(0xB321, None, "HANGUL SYLLABLE DYANJ", 0x31, "Hangul"),
    c(0xB322, None, "HANGUL SYLLABLE DYANH", 0x31, "Hangul"),
    c(0xB323, None, "HANGUL SYLLABLE DYAD", 0x31, "Hangul"),
    c(0xB324, None, "HANGUL SYLLABLE DYAL", 0x31, "Hangul"),
    c(0xB325, None, "HANGUL SYLLABLE DYALG", 0x31, "Hangul"),
    c(0xB326, None, "HANGUL SYLLABLE DYALM", 0x31, "Hangul"),
    c(0xB327, None, "HANGUL SYLLABLE DYALB", 0x31, "Hangul"),
    c(0xB328, None, "HANGUL SYLLABLE DYALS", 0x31, "Hangul"),
    c(0xB329, None, "HANGUL SYLLABLE DYALT", 0x31, "Hangul"),
    c(0xB32A, None, "HANGUL SYLLABLE DYALP", 0x31, "Hangul"),
    c(0xB32B, None, "HANGUL SYLLABLE DYALH", 0x31, "Hangul"),
    c(0xB32C, None, "HANGUL SYLLABLE DYAM", 0x31, "Hangul"),
    c(0xB32D, None, "HANGUL SYLLABLE DYAB", 0x31, "Hangul"),
    c(0xB32E, None, "HANGUL SYLLABLE DYABS", 0x31, "Hangul"),
    c(0xB32F, None, "HANGUL SYLLABLE DYAS", 0x31, "Hangul"),
    c(0xB330, None, "HANGUL SYLLABLE DYASS", 0x31, "Hangul"),
    c(0xB331, None, "HANGUL SYLLABLE DYANG", 0x31, "Hangul"),
    c(0xB332, None, "HANGUL SYLLABLE DYAJ", 0x31, "Hangul"),
    c(0xB333, None, "HANGUL SYLLABLE DYAC", 0x31, "Hangul"),
    c(0xB334, None, "HANGUL SYLLABLE DYAK", 0x31, "Hangul"),
    c(0xB335, None, "HANGUL SYLLABLE DYAT", 0x31, "Hangul"),
    c(0xB336, None, "HANGUL SYLLABLE DYAP", 0x31, "Hangul"),
    c(0xB337, None, "HANGUL SYLLABLE DYAH", 0x31, "Hangul"),
    c(0xB338, None, "HANGUL SYLLABLE DYAE", 0x31, "Hangul"),
    c(0xB339, None, "HANGUL SYLLABLE DYAEG", 0x31, "Hangul"),
    c(0xB33A, None, "HANGUL SYLLABLE DYAEGG", 0x31, "Hangul"),
    c(0xB33B, None, "HANGUL SYLLABLE DYAEGS", 0x31, "Hangul"),
    c(0xB33C, None, "HANGUL SYLLABLE DYAEN", 0x31, "Hangul"),
    c(0xB33D, None, "HANGUL SYLLABLE DYAENJ", 0x31, "Hangul"),
    c(0xB33E, None, "HANGUL SYLLABLE DYAENH", 0x31, "Hangul"),
    c(0xB33F, None, "HANGUL SYLLABLE DYAED", 0x31, "Hangul"),
    c(0xB340, None, "HANGUL SYLLABLE DYAEL", 0x31, "Hangul"),
    c(0xB341, None, "HANGUL SYLLABLE DYAELG", 0x31, "Hangul"),
    c(0xB342, None, "HANGUL SYLLABLE DYAELM", 0x31, "Hangul"),
    c(0xB343, None, "HANGUL SYLLABLE DYAELB", 0x31, "Hangul"),
    c(0xB344, None, "HANGUL SYLLABLE DYAELS", 0x31, "Hangul"),
    c(0xB345, None, "HANGUL SYLLABLE DYAELT", 0x31, "Hangul"),
    c(0xB346, None, "HANGUL SYLLABLE DYAELP", 0x31, "Hangul"),
    c(0xB347, None, "HANGUL SYLLABLE DYAELH", 0x31, "Hangul"),
    c(0xB348, None, "HANGUL SYLLABLE DYAEM", 0x31, "Hangul"),
    c(0xB349, None, "HANGUL SYLLABLE DYAEB", 0x31, "Hangul"),
    c(0xB34A, None, "HANGUL SYLLABLE DYAEBS", 0x31, "Hangul"),
    c(0xB34B, None, "HANGUL SYLLABLE DYAES", 0x31, "Hangul"),
    c(0xB34C, None, "HANGUL SYLLABLE DYAESS", 0x31, "Hangul"),
    c(0xB34D, None, "HANGUL SYLLABLE DYAENG", 0x31, "Hangul"),
    c(0xB34E, None, "HANGUL SYLLABLE DYAEJ", 0x31, "Hangul"),
    c(0xB34F, None, "HANGUL SYLLABLE DYAEC", 0x31, "Hangul"),
    c(0xB350, None, "HANGUL SYLLABLE DYAEK", 0x31, "Hangul"),
    c(0xB351, None, "HANGUL SYLLABLE DYAET", 0x31, "Hangul"),
    c(0xB352, None, "HANGUL SYLLABLE DYAEP", 0x31, "Hangul"),
    c(0xB353, None, "HANGUL SYLLABLE DYAEH", 0x31, "Hangul"),
    c(0xB354, None, "HANGUL SYLLABLE DEO", 0x31, "Hangul"),
    c(0xB355, None, "HANGUL SYLLABLE DEOG", 0x31, "Hangul"),
    c(0xB356, None, "HANGUL SYLLABLE DEOGG", 0x31, "Hangul"),
    c(0xB357, None, "HANGUL SYLLABLE DEOGS", 0x31, "Hangul"),
    c(0xB358, None, "HANGUL SYLLABLE DEON", 0x31, "Hangul"),
    c(0xB359, None, "HANGUL SYLLABLE DEONJ", 0x31, "Hangul"),
    c(0xB35A, None, "HANGUL SYLLABLE DEONH", 0x31, "Hangul"),
    c(0xB35B, None, "HANGUL SYLLABLE DEOD", 0x31, "Hangul"),
    c(0xB35C, None, "HANGUL SYLLABLE DEOL", 0x31, "Hangul"),
    c(0xB35D, None, "HANGUL SYLLABLE DEOLG", 0x31, "Hangul"),
    c(0xB35E, None, "HANGUL SYLLABLE DEOLM", 0x31, "Hangul"),
    c(0xB35F, None, "HANGUL SYLLABLE DEOLB", 0x31, "Hangul"),
    c(0xB360, None, "HANGUL SYLLABLE DEOLS", 0x31, "Hangul"),
    c(0xB361, None, "HANGUL SYLLABLE DEOLT", 0x31, "Hangul"),
    c(0xB362, None, "HANGUL SYLLABLE DEOLP", 0x31, "Hangul"),
    c(0xB363, None, "HANGUL SYLLABLE DEOLH", 0x31, "Hangul"),
    c(0xB364, None, "HANGUL SYLLABLE DEOM", 0x31, "Hangul"),
    c(0xB365, None, "HANGUL SYLLABLE DEOB", 0x31, "Hangul"),
    c(0xB366, None, "HANGUL SYLLABLE DEOBS", 0x31, "Hangul"),
    c(0xB367, None, "HANGUL SYLLABLE DEOS", 0x31, "Hangul"),
    c(0xB368, None, "HANGUL SYLLABLE DEOSS", 0x31, "Hangul"),
    c(0xB369, None, "HANGUL SYLLABLE DEONG", 0x31, "Hangul"),
    c(0xB36A, None, "HANGUL SYLLABLE DEOJ", 0x31, "Hangul"),
    c(0xB36B, None, "HANGUL SYLLABLE DEOC", 0x31, "Hangul"),
    c(0xB36C, None, "HANGUL SYLLABLE DEOK", 0x31, "Hangul"),
    c(0xB36D, None, "HANGUL SYLLABLE DEOT", 0x31, "Hangul"),
    c(0xB36E, None, "HANGUL SYLLABLE DEOP", 0x31, "Hangul"),
    c(0xB36F, None, "HANGUL SYLLABLE DEOH", 0x31, "Hangul"),
    c(0xB370, None, "HANGUL SYLLABLE DE", 0x31, "Hangul"),
    c(0xB371, None, "HANGUL SYLLABLE DEG", 0x31, "Hangul"),
    c(0xB372, None, "HANGUL SYLLABLE DEGG", 0x31, "Hangul"),
    c(0xB373, None, "HANGUL SYLLABLE DEGS", 0x31, "Hangul"),
    c(0xB374, None, "HANGUL SYLLABLE DEN", 0x31, "Hangul"),
    c(0xB375, None, "HANGUL SYLLABLE DENJ", 0x31, "Hangul"),
    c(0xB376, None, "HANGUL SYLLABLE DENH", 0x31, "Hangul"),
    c(0xB377, None, "HANGUL SYLLABLE DED", 0x31, "Hangul"),
    c(0xB378, None, "HANGUL SYLLABLE DEL", 0x31, "Hangul"),
    c(0xB379, None, "HANGUL SYLLABLE DELG", 0x31, "Hangul"),
    c(0xB37A, None, "HANGUL SYLLABLE DELM", 0x31, "Hangul"),
    c(0xB37B, None, "HANGUL SYLLABLE DELB", 0x31, "Hangul"),
    c(0xB37C, None, "HANGUL SYLLABLE DELS", 0x31, "Hangul"),
    c(0xB37D, None, "HANGUL SYLLABLE DELT", 0x31, "Hangul"),
    c(0xB37E, None, "HANGUL SYLLABLE DELP", 0x31, "Hangul"),
    c(0xB37F, None, "HANGUL SYLLABLE DELH", 0x31, "Hangul"),
    c(0xB380, None, "HANGUL SYLLABLE DEM", 0x31, "Hangul"),
    c(0xB381, None, "HANGUL SYLLABLE DEB", 0x31, "Hangul"),
    c(0xB382, None, "HANGUL SYLLABLE DEBS", 0x31, "Hangul"),
    c(0xB383, None, "HANGUL SYLLABLE DES", 0x31, "Hangul"),
    c(0xB384, None, "HANGUL SYLLABLE DESS", 0x31, "Hangul"),
    c(0xB385, None, "HANGUL SYLLABLE DENG", 0x31, "Hangul"),
    c(0xB386, None, "HANGUL SYLLABLE DEJ", 0x31, "Hangul"),
    c(0xB387, None, "HANGUL SYLLABLE DEC", 0x31, "Hangul"),
    c(0xB388, None, "HANGUL SYLLABLE DEK", 0x31, "Hangul"),
    c(0xB389, None, "HANGUL SYLLABLE DET", 0x31, "Hangul"),
    c(0xB38A, None, "HANGUL SYLLABLE DEP", 0x31, "Hangul"),
    c(0xB38B, None, "HANGUL SYLLABLE DEH", 0x31, "Hangul"),
    c(0xB38C, None, "HANGUL SYLLABLE DYEO", 0x31, "Hangul"),
    c(0xB38D, None, "HANGUL SYLLABLE DYEOG", 0x31, "Hangul"),
    c(0xB38E, None, "HANGUL SYLLABLE DYEOGG", 0x31, "Hangul"),
    c(0xB38F, None, "HANGUL SYLLABLE DYEOGS", 0x31, "Hangul"),
    c(0xB390, None, "HANGUL SYLLABLE DYEON", 0x31, "Hangul"),
    c(0xB391, None, "HANGUL SYLLABLE DYEONJ", 0x31, "Hangul"),
    c(0xB392, None, "HANGUL SYLLABLE DYEONH", 0x31, "Hangul"),
    c(0xB393, None, "HANGUL SYLLABLE DYEOD", 0x31, "Hangul"),
    c(0xB394, None, "HANGUL SYLLABLE DYEOL", 0x31, "Hangul"),
    c(0xB395, None, "HANGUL SYLLABLE DYEOLG", 0x31, "Hangul"),
    c(0xB396, None, "HANGUL SYLLABLE DYEOLM", 0x31, "Hangul"),
    c(0xB397, None, "HANGUL SYLLABLE DYEOLB", 0x31, "Hangul"),
    c(0xB398, None, "HANGUL SYLLABLE DYEOLS", 0x31, "Hangul"),
    c(0xB399, None, "HANGUL SYLLABLE DYEOLT", 0x31, "Hangul"),
    c(0xB39A, None, "HANGUL SYLLABLE DYEOLP", 0x31, "Hangul"),
    c(0xB39B, None, "HANGUL SYLLABLE DYEOLH", 0x31, "Hangul"),
    c(0xB39C, None, "HANGUL SYLLABLE DYEOM", 0x31, "Hangul"),
    c(0xB39D, None, "HANGUL SYLLABLE DYEOB", 0x31, "Hangul"),
    c(0xB39E, None, "HANGUL SYLLABLE DYEOBS", 0x31, "Hangul"),
    c(0xB39F, None, "HANGUL SYLLABLE DYEOS", 0x31, "Hangul"),
    c(0xB3A0, None, "HANGUL SYLLABLE DYEOSS", 0x31, "Hangul"),
    c(0xB3A1, None, "HANGUL SYLLABLE DYEONG", 0x31, "Hangul"),
    c(0xB3A2, None, "HANGUL SYLLABLE DYEOJ", 0x31, "Hangul"),
    c(0xB3A3, None, "HANGUL SYLLABLE DYEOC", 0x31, "Hangul"),
    c(0xB3A4, None, "HANGUL SYLLABLE DYEOK", 0x31, "Hangul"),
    c(0xB3A5, None, "HANGUL SYLLABLE DYEOT", 0x31, "Hangul"),
    c(0xB3A6, None, "HANGUL SYLLABLE DYEOP", 0x31, "Hangul"),
    c(0xB3A7, None, "HANGUL SYLLABLE DYEOH", 0x31, "Hangul"),
    c(0xB3A8, None, "HANGUL SYLLABLE DYE", 0x31, "Hangul"),
    c(0xB3A9, None, "HANGUL SYLLABLE DYEG", 0x31, "Hangul"),
    c(0xB3AA, None, "HANGUL SYLLABLE DYEGG", 0x31, "Hangul"),
    c(0xB3AB, None, "HANGUL SYLLABLE DYEGS", 0x31, "Hangul"),
    c(0xB3AC, None, "HANGUL SYLLABLE DYEN", 0x31, "Hangul"),
    c(0xB3AD, None, "HANGUL SYLLABLE DYENJ", 0x31, "Hangul"),
    c(0xB3AE, None, "HANGUL SYLLABLE DYENH", 0x31, "Hangul"),
    c(0xB3AF, None, "HANGUL SYLLABLE DYED", 0x31, "Hangul"),
    c(0xB3B0, None, "HANGUL SYLLABLE DYEL", 0x31, "Hangul"),
    c(0xB3B1, None, "HANGUL SYLLABLE DYELG", 0x31, "Hangul"),
    c(0xB3B2, None, "HANGUL SYLLABLE DYELM", 0x31, "Hangul"),
    c(0xB3B3, None, "HANGUL SYLLABLE DYELB", 0x31, "Hangul"),
    c(0xB3B4, None, "HANGUL SYLLABLE DYELS", 0x31, "Hangul"),
    c(0xB3B5, None, "HANGUL SYLLABLE DYELT", 0x31, "Hangul"),
    c(0xB3B6, None, "HANGUL SYLLABLE DYELP", 0x31, "Hangul"),
    c(0xB3B7, None, "HANGUL SYLLABLE DYELH", 0x31, "Hangul"),
    c(0xB3B8, None, "HANGUL SYLLABLE DYEM", 0x31, "Hangul"),
    c(0xB3B9, None, "HANGUL SYLLABLE DYEB", 0x31, "Hangul"),
    c(0xB3BA, None, "HANGUL SYLLABLE DYEBS", 0x31, "Hangul"),
    c(0xB3BB, None, "HANGUL SYLLABLE DYES", 0x31, "Hangul"),
    c(0xB3BC, None, "HANGUL SYLLABLE DYESS", 0x31, "Hangul"),
    c(0xB3BD, None, "HANGUL SYLLABLE DYENG", 0x31, "Hangul"),
    c(0xB3BE, None, "HANGUL SYLLABLE DYEJ", 0x31, "Hangul"),
    c(0xB3BF, None, "HANGUL SYLLABLE DYEC", 0x31, "Hangul"),
    c(0xB3C0, None, "HANGUL SYLLABLE DYEK", 0x31, "Hangul"),
    c(0xB3C1, None, "HANGUL SYLLABLE DYET", 0x31, "Hangul"),
    c(0xB3C2, None, "HANGUL SYLLABLE DYEP", 0x31, "Hangul"),
    c(0xB3C3, None, "HANGUL SYLLABLE DYEH", 0x31, "Hangul"),
    c(0xB3C4, None, "HANGUL SYLLABLE DO", 0x31, "Hangul"),
    c(0xB3C5, None, "HANGUL SYLLABLE DOG", 0x31, "Hangul"),
    c(0xB3C6, None, "HANGUL SYLLABLE DOGG", 0x31, "Hangul"),
    c(0xB3C7, None, "HANGUL SYLLABLE DOGS", 0x31, "Hangul"),
    c(0xB3C8, None, "HANGUL SYLLABLE DON", 0x31, "Hangul"),
    c(0xB3C9, None, "HANGUL SYLLABLE DONJ", 0x31, "Hangul"),
    c(0xB3CA, None, "HANGUL SYLLABLE DONH", 0x31, "Hangul"),
    c(0xB3CB, None, "HANGUL SYLLABLE DOD", 0x31, "Hangul"),
    c(0xB3CC, None, "HANGUL SYLLABLE DOL", 0x31, "Hangul"),
    c(0xB3CD, None, "HANGUL SYLLABLE DOLG", 0x31, "Hangul"),
    c(0xB3CE, None, "HANGUL SYLLABLE DOLM", 0x31, "Hangul"),
    c(0xB3CF, None, "HANGUL SYLLABLE DOLB", 0x31, "Hangul"),
    c(0xB3D0, None, "HANGUL SYLLABLE DOLS", 0x31, "Hangul"),
    c(0xB3D1, None, "HANGUL SYLLABLE DOLT", 0x31, "Hangul"),
    c(0xB3D2, None, "HANGUL SYLLABLE DOLP", 0x31, "Hangul"),
    c(0xB3D3, None, "HANGUL SYLLABLE DOLH", 0x31, "Hangul"),
    c(0xB3D4, None, "HANGUL SYLLABLE DOM", 0x31, "Hangul"),
    c(0xB3D5, None, "HANGUL SYLLABLE DOB", 0x31, "Hangul"),
    c(0xB3D6, None, "HANGUL SYLLABLE DOBS", 0x31, "Hangul"),
    c(0xB3D7, None, "HANGUL SYLLABLE DOS", 0x31, "Hangul"),
    c(0xB3D8, None, "HANGUL SYLLABLE DOSS", 0x31, "Hangul"),
    c(0xB3D9, None, "HANGUL SYLLABLE DONG", 0x31, "Hangul"),
    c(0xB3DA, None, "HANGUL SYLLABLE DOJ", 0x31, "Hangul"),
    c(0xB3DB, None, "HANGUL SYLLABLE DOC", 0x31, "Hangul"),
    c(0xB3DC, None, "HANGUL SYLLABLE DOK", 0x31, "Hangul"),
    c(0xB3DD, None, "HANGUL SYLLABLE DOT", 0x31, "Hangul"),
    c(0xB3DE, None, "HANGUL SYLLABLE DOP", 0x31, "Hangul"),
    c(0xB3DF, None, "HANGUL SYLLABLE DOH", 0x31, "Hangul"),
    c(0xB3E0, None, "HANGUL SYLLABLE DWA", 0x31, "Hangul"),
    c(0xB3E1, None, "HANGUL SYLLABLE DWAG", 0x31, "Hangul"),
    c(0xB3E2, None, "HANGUL SYLLABLE DWAGG", 0x31, "Hangul"),
    c(0xB3E3, None, "HANGUL SYLLABLE DWAGS", 0x31, "Hangul"),
    c(0xB3E4, None, "HANGUL SYLLABLE DWAN", 0x31, "Hangul"),
    c(0xB3E5, None, "HANGUL SYLLABLE DWANJ", 0x31, "Hangul"),
    c(0xB3E6, None, "HANGUL SYLLABLE DWANH", 0x31, "Hangul"),
    c(0xB3E7, None, "HANGUL SYLLABLE DWAD", 0x31, "Hangul"),
    c(0xB3E8, None, "HANGUL SYLLABLE DWAL", 0x31, "Hangul"),
    c(0xB3E9, None, "HANGUL SYLLABLE DWALG", 0x31, "Hangul"),
    c(0xB3EA, None, "HANGUL SYLLABLE DWALM", 0x31, "Hangul"),
    c(0xB3EB, None, "HANGUL SYLLABLE DWALB", 0x31, "Hangul"),
    c(0xB3EC, None, "HANGUL SYLLABLE DWALS", 0x31, "Hangul"),
    c(0xB3ED, None, "HANGUL SYLLABLE DWALT", 0x31, "Hangul"),
    c(0xB3EE, None, "HANGUL SYLLABLE DWALP", 0x31, "Hangul"),
    c(0xB3EF, None, "HANGUL SYLLABLE DWALH", 0x31, "Hangul"),
    c(0xB3F0, None, "HANGUL SYLLABLE DWAM", 0x31, "Hangul"),
    c(0xB3F1, None, "HANGUL SYLLABLE DWAB", 0x31, "Hangul"),
    c(0xB3F2, None, "HANGUL SYLLABLE DWABS", 0x31, "Hangul"),
    c(0xB3F3, None, "HANGUL SYLLABLE DWAS", 0x31, "Hangul"),
    c(0xB3F4, None, "HANGUL SYLLABLE DWASS", 0x31, "Hangul"),
    c(0xB3F5, None, "HANGUL SYLLABLE DWANG", 0x31, "Hangul"),
    c(0xB3F6, None, "HANGUL SYLLABLE DWAJ", 0x31, "Hangul"),
    c(0xB3F7, None, "HANGUL SYLLABLE DWAC", 0x31, "Hangul"),
    c(0xB3F8, None, "HANGUL SYLLABLE DWAK", 0x31, "Hangul"),
    c(0xB3F9, None, "HANGUL SYLLABLE DWAT", 0x31, "Hangul"),
    c(0xB3FA, None, "HANGUL SYLLABLE DWAP", 0x31, "Hangul"),
    c(0xB3FB, None, "HANGUL SYLLABLE DWAH", 0x31, "Hangul"),
    c(0xB3FC, None, "HANGUL SYLLABLE DWAE", 0x31, "Hangul"),
    c(0xB3FD, None, "HANGUL SYLLABLE DWAEG", 0x31, "Hangul"),
    c(0xB3FE, None, "HANGUL SYLLABLE DWAEGG", 0x31, "Hangul"),
    c(0xB3FF, None, "HANGUL SYLLABLE DWAEGS", 0x31, "Hangul"),
    c(0xB400, None, "HANGUL SYLLABLE DWAEN", 0x31, "Hangul"),
    c(0xB401, None, "HANGUL SYLLABLE DWAENJ", 0x31, "Hangul"),
    c(0xB402, None, "HANGUL SYLLABLE DWAENH", 0x31, "Hangul"),
    c(0xB403, None, "HANGUL SYLLABLE DWAED", 0x31, "Hangul"),
    c(0xB404, None, "HANGUL SYLLABLE DWAEL", 0x31, "Hangul"),
    c(0xB405, None, "HANGUL SYLLABLE DWAELG", 0x31, "Hangul"),
    c(0xB406, None, "HANGUL SYLLABLE DWAELM", 0x31, "Hangul"),
    c(0xB407, None, "HANGUL SYLLABLE DWAELB", 0x31, "Hangul"),
    c(0xB408, None, "HANGUL SYLLABLE DWAELS", 0x31, "Hangul"),
    c(0xB409, None, "HANGUL SYLLABLE DWAELT", 0x31, "Hangul"),
    c(0xB40A, None, "HANGUL SYLLABLE DWAELP", 0x31, "Hangul"),
    c(0xB40B, None, "HANGUL SYLLABLE DWAELH", 0x31, "Hangul"),
    c(0xB40C, None, "HANGUL SYLLABLE DWAEM", 0x31, "Hangul"),
    c(0xB40D, None, "HANGUL SYLLABLE DWAEB", 0x31, "Hangul"),
    c(0xB40E, None, "HANGUL SYLLABLE DWAEBS", 0x31, "Hangul"),
    c(0xB40F, None, "HANGUL SYLLABLE DWAES", 0x31, "Hangul"),
    c(0xB410, None, "HANGUL SYLLABLE DWAESS", 0x31, "Hangul"),
    c(0xB411, None, "HANGUL SYLLABLE DWAENG", 0x31, "Hangul"),
    c(0xB412, None, "HANGUL SYLLABLE DWAEJ", 0x31, "Hangul"),
    c(0xB413, None, "HANGUL SYLLABLE DWAEC", 0x31, "Hangul"),
    c(0xB414, None, "HANGUL SYLLABLE DWAEK", 0x31, "Hangul"),
    c(0xB415, None, "HANGUL SYLLABLE DWAET", 0x31, "Hangul"),
    c(0xB416, None, "HANGUL SYLLABLE DWAEP", 0x31, "Hangul"),
    c(0xB417, None, "HANGUL SYLLABLE DWAEH", 0x31, "Hangul"),
    c(0xB418, None, "HANGUL SYLLABLE DOE", 0x31, "Hangul"),
    c(0xB419, None, "HANGUL SYLLABLE DOEG", 0x31, "Hangul"),
    c(0xB41A, None, "HANGUL SYLLABLE DOEGG", 0x31, "Hangul"),
    c(0xB41B, None, "HANGUL SYLLABLE DOEGS", 0x31, "Hangul"),
    c(0xB41C, None, "HANGUL SYLLABLE DOEN", 0x31, "Hangul"),
    c(0xB41D, None, "HANGUL SYLLABLE DOENJ", 0x31, "Hangul"),
    c(0xB41E, None, "HANGUL SYLLABLE DOENH", 0x31, "Hangul"),
    c(0xB41F, None, "HANGUL SYLLABLE DOED", 0x31, "Hangul"),
    c(0xB420, None, "HANGUL SYLLABLE DOEL", 0x31, "Hangul"),
    c(0xB421, None, "HANGUL SYLLABLE DOELG", 0x31, "Hangul"),
    c(0xB422, None, "HANGUL SYLLABLE DOELM", 0x31, "Hangul"),
    c(0xB423, None, "HANGUL SYLLABLE DOELB", 0x31, "Hangul"),
    c(0xB424, None, "HANGUL SYLLABLE DOELS", 0x31, "Hangul"),
    c(0xB425, None, "HANGUL SYLLABLE DOELT", 0x31, "Hangul"),
    c(0xB426, None, "HANGUL SYLLABLE DOELP", 0x31, "Hangul"),
    c(0xB427, None, "HANGUL SYLLABLE DOELH", 0x31, "Hangul"),
    c(0xB428, None, "HANGUL SYLLABLE DOEM", 0x31, "Hangul"),
    c(0xB429, None, "HANGUL SYLLABLE DOEB", 0x31, "Hangul"),
    c(0xB42A, None, "HANGUL SYLLABLE DOEBS", 0x31, "Hangul"),
    c(0xB42B, None, "HANGUL SYLLABLE DOES", 0x31, "Hangul"),
    c(0xB42C, None, "HANGUL SYLLABLE DOESS", 0x31, "Hangul"),
    c(0xB42D, None, "HANGUL SYLLABLE DOENG", 0x31, "Hangul"),
    c(0xB42E, None, "HANGUL SYLLABLE DOEJ", 0x31, "Hangul"),
    c(0xB42F, None, "HANGUL SYLLABLE DOEC", 0x31, "Hangul"),
    c(0xB430, None, "HANGUL SYLLABLE DOEK", 0x31, "Hangul"),
    c(0xB431, None, "HANGUL SYLLABLE DOET", 0x31, "Hangul"),
    c(0xB432, None, "HANGUL SYLLABLE DOEP", 0x31, "Hangul"),
    c(0xB433, None, "HANGUL SYLLABLE DOEH", 0x31, "Hangul"),
    c(0xB434, None, "HANGUL SYLLABLE DYO", 0x31, "Hangul"),
    c(0xB435, None, "HANGUL SYLLABLE DYOG", 0x31, "Hangul"),
    c(0xB436, None, "HANGUL SYLLABLE DYOGG", 0x31, "Hangul"),
    c(0xB437, None, "HANGUL SYLLABLE DYOGS", 0x31, "Hangul"),
    c(0xB438, None, "HANGUL SYLLABLE DYON", 0x31, "Hangul"),
    c(0xB439, None, "HANGUL SYLLABLE DYONJ", 0x31, "Hangul"),
    c(0xB43A, None, "HANGUL SYLLABLE DYONH", 0x31, "Hangul"),
    c(0xB43B, None, "HANGUL SYLLABLE DYOD", 0x31, "Hangul"),
    c(0xB43C, None, "HANGUL SYLLABLE DYOL", 0x31, "Hangul"),
    c(0xB43D, None, "HANGUL SYLLABLE DYOLG", 0x31, "Hangul"),
    c(0xB43E, None, "HANGUL SYLLABLE DYOLM", 0x31, "Hangul"),
    c(0xB43F, None, "HANGUL SYLLABLE DYOLB", 0x31, "Hangul"),
    c(0xB440, None, "HANGUL SYLLABLE DYOLS", 0x31, "Hangul"),
    c(0xB441, None, "HANGUL SYLLABLE DYOLT", 0x31, "Hangul"),
    c(0xB442, None, "HANGUL SYLLABLE DYOLP", 0x31, "Hangul"),
    c(0xB443, None, "HANGUL SYLLABLE DYOLH", 0x31, "Hangul"),
    c(0xB444, None, "HANGUL SYLLABLE DYOM", 0x31, "Hangul"),
    c(0xB445, None, "HANGUL SYLLABLE DYOB", 0x31, "Hangul"),
    c(0xB446, None, "HANGUL SYLLABLE DYOBS", 0x31, "Hangul"),
    c(0xB447, None, "HANGUL SYLLABLE DYOS", 0x31, "Hangul"),
    c(0xB448, None, "HANGUL SYLLABLE DYOSS", 0x31, "Hangul"),
    c(0xB449, None, "HANGUL SYLLABLE DYONG", 0x31, "Hangul"),
    c(0xB44A, None, "HANGUL SYLLABLE DYOJ", 0x31, "Hangul"),
    c(0xB44B, None, "HANGUL SYLLABLE DYOC", 0x31, "Hangul"),
    c(0xB44C, None, "HANGUL SYLLABLE DYOK", 0x31, "Hangul"),
    c(0xB44D, None, "HANGUL SYLLABLE DYOT", 0x31, "Hangul"),
    c(0xB44E, None, "HANGUL SYLLABLE DYOP", 0x31, "Hangul"),
    c(0xB44F, None, "HANGUL SYLLABLE DYOH", 0x31, "Hangul"),
    c(0xB450, None, "HANGUL SYLLABLE DU", 0x31, "Hangul"),
    c(0xB451, None, "HANGUL SYLLABLE DUG", 0x31, "Hangul"),
    c(0xB452, None, "HANGUL SYLLABLE DUGG", 0x31, "Hangul"),
    c(0xB453, None, "HANGUL SYLLABLE DUGS", 0x31, "Hangul"),
    c(0xB454, None, "HANGUL SYLLABLE DUN", 0x31, "Hangul"),
    c(0xB455, None, "HANGUL SYLLABLE DUNJ", 0x31, "Hangul"),
    c(0xB456, None, "HANGUL SYLLABLE DUNH", 0x31, "Hangul"),
    c(0xB457, None, "HANGUL SYLLABLE DUD", 0x31, "Hangul"),
    c(0xB458, None, "HANGUL SYLLABLE DUL", 0x31, "Hangul"),
    c(0xB459, None, "HANGUL SYLLABLE DULG", 0x31, "Hangul"),
    c(0xB45A, None, "HANGUL SYLLABLE DULM", 0x31, "Hangul"),
    c(0xB45B, None, "HANGUL SYLLABLE DULB", 0x31, "Hangul"),
    c(0xB45C, None, "HANGUL SYLLABLE DULS", 0x31, "Hangul"),
    c(0xB45D, None, "HANGUL SYLLABLE DULT", 0x31, "Hangul"),
    c(0xB45E, None, "HANGUL SYLLABLE DULP", 0x31, "Hangul"),
    c(0xB45F, None, "HANGUL SYLLABLE DULH", 0x31, "Hangul"),
    c(0xB460, None, "HANGUL SYLLABLE DUM", 0x31, "Hangul"),
    c(0xB461, None, "HANGUL SYLLABLE DUB", 0x31, "Hangul"),
    c(0xB462, None, "HANGUL SYLLABLE DUBS", 0x31, "Hangul"),
    c(0xB463, None, "HANGUL SYLLABLE DUS", 0x31, "Hangul"),
    c(0xB464, None, "HANGUL SYLLABLE DUSS", 0x31, "Hangul"),
    c(0xB465, None, "HANGUL SYLLABLE DUNG", 0x31, "Hangul"),
    c(0xB466, None, "HANGUL SYLLABLE DUJ", 0x31, "Hangul"),
    c(0xB467, None, "HANGUL SYLLABLE DUC", 0x31, "Hangul"),
    c(0xB468, None, "HANGUL SYLLABLE DUK", 0x31, "Hangul"),
    c(0xB469, None, "HANGUL SYLLABLE DUT", 0x31, "Hangul"),
    c(0xB46A, None, "HANGUL SYLLABLE DUP", 0x31, "Hangul"),
    c(0xB46B, None, "HANGUL SYLLABLE DUH", 0x31, "Hangul"),
    c(0xB46C, None, "HANGUL SYLLABLE DWEO", 0x31, "Hangul"),
    c(0xB46D, None, "HANGUL SYLLABLE DWEOG", 0x31, "Hangul"),
    c(0xB46E, None, "HANGUL SYLLABLE DWEOGG", 0x31, "Hangul"),
    c(0xB46F, None, "HANGUL SYLLABLE DWEOGS", 0x31, "Hangul"),
    c(0xB470, None, "HANGUL SYLLABLE DWEON", 0x31, "Hangul"),
    c(0xB471, None, "HANGUL SYLLABLE DWEONJ", 0x31, "Hangul"),
    c(0xB472, None, "HANGUL SYLLABLE DWEONH", 0x31, "Hangul"),
    c(0xB473, None, "HANGUL SYLLABLE DWEOD", 0x31, "Hangul"),
    c(0xB474, None, "HANGUL SYLLABLE DWEOL", 0x31, "Hangul"),
    c(0xB475, None, "HANGUL SYLLABLE DWEOLG", 0x31, "Hangul"),
    c(0xB476, None, "HANGUL SYLLABLE DWEOLM", 0x31, "Hangul"),
    c(0xB477, None, "HANGUL SYLLABLE DWEOLB", 0x31, "Hangul"),
    c(0xB478, None, "HANGUL SYLLABLE DWEOLS", 0x31, "Hangul"),
    c(0xB479, None, "HANGUL SYLLABLE DWEOLT", 0x31, "Hangul"),
    c(0xB47A, None, "HANGUL SYLLABLE DWEOLP", 0x31, "Hangul"),
    c(0xB47B, None, "HANGUL SYLLABLE DWEOLH", 0x31, "Hangul"),
    c(0xB47C, None, "HANGUL SYLLABLE DWEOM", 0x31, "Hangul"),
    c(0xB47D, None, "HANGUL SYLLABLE DWEOB", 0x31, "Hangul"),
    c(0xB47E, None, "HANGUL SYLLABLE DWEOBS", 0x31, "Hangul"),
    c(0xB47F, None, "HANGUL SYLLABLE DWEOS", 0x31, "Hangul"),
    c(0xB480, None, "HANGUL SYLLABLE DWEOSS", 0x31, "Hangul"),
    c(0xB481, None, "HANGUL SYLLABLE DWEONG", 0x31, "Hangul"),
    c(0xB482, None, "HANGUL SYLLABLE DWEOJ", 0x31, "Hangul"),
    c(0xB483, None, "HANGUL SYLLABLE DWEOC", 0x31, "Hangul"),
    c(0xB484, None, "HANGUL SYLLABLE DWEOK", 0x31, "Hangul"),
    c(0xB485, None, "HANGUL SYLLABLE DWEOT", 0x31, "Hangul"),
    c(0xB486, None, "HANGUL SYLLABLE DWEOP", 0x31, "Hangul"),
    c(0xB487, None, "HANGUL SYLLABLE DWEOH", 0x31, "Hangul"),
    c(0xB488, None, "HANGUL SYLLABLE DWE", 0x31, "Hangul"),
    c(0xB489, None, "HANGUL SYLLABLE DWEG", 0x31, "Hangul"),
    c(0xB48A, None, "HANGUL SYLLABLE DWEGG", 0x31, "Hangul"),
    c(0xB48B, None, "HANGUL SYLLABLE DWEGS", 0x31, "Hangul"),
    c(0xB48C, None, "HANGUL SYLLABLE DWEN", 0x31, "Hangul"),
    c(0xB48D, None, "HANGUL SYLLABLE DWENJ", 0x31, "Hangul"),
    c(0xB48E, None, "HANGUL SYLLABLE DWENH", 0x31, "Hangul"),
    c(0xB48F, None, "HANGUL SYLLABLE DWED", 0x31, "Hangul"),
    c(0xB490, None, "HANGUL SYLLABLE DWEL", 0x31, "Hangul"),
    c(0xB491, None, "HANGUL SYLLABLE DWELG", 0x31, "Hangul"),
    c(0xB492, None, "HANGUL SYLLABLE DWELM", 0x31, "Hangul"),
    c(0xB493, None, "HANGUL SYLLABLE DWELB", 0x31, "Hangul"),
    c(0xB494, None, "HANGUL SYLLABLE DWELS", 0x31, "Hangul"),
    c(0xB495, None, "HANGUL SYLLABLE DWELT", 0x31, "Hangul"),
    c(0xB496, None, "HANGUL SYLLABLE DWELP", 0x31, "Hangul"),
    c(0xB497, None, "HANGUL SYLLABLE DWELH", 0x31, "Hangul"),
    c(0xB498, None, "HANGUL SYLLABLE DWEM", 0x31, "Hangul"),
    c(0xB499, None, "HANGUL SYLLABLE DWEB", 0x31, "Hangul"),
    c(0xB49A, None, "HANGUL SYLLABLE DWEBS", 0x31, "Hangul"),
    c(0xB49B, None, "HANGUL SYLLABLE DWES", 0x31, "Hangul"),
    c(0xB49C, None, "HANGUL SYLLABLE DWESS", 0x31, "Hangul"),
    c(0xB49D, None, "HANGUL SYLLABLE DWENG", 0x31, "Hangul"),
    c(0xB49E, None, "HANGUL SYLLABLE DWEJ", 0x31, "Hangul"),
    c(0xB49F, None, "HANGUL SYLLABLE DWEC", 0x31, "Hangul"),
    c(0xB4A0, None, "HANGUL SYLLABLE DWEK", 0x31, "Hangul"),
    c(0xB4A1, None, "HANGUL SYLLABLE DWET", 0x31, "Hangul"),
    c(0xB4A2, None, "HANGUL SYLLABLE DWEP", 0x31, "Hangul"),
    c(0xB4A3, None, "HANGUL SYLLABLE DWEH", 0x31, "Hangul"),
    c(0xB4A4, None, "HANGUL SYLLABLE DWI", 0x31, "Hangul"),
    c(0xB4A5, None, "HANGUL SYLLABLE DWIG", 0x31, "Hangul"),
    c(0xB4A6, None, "HANGUL SYLLABLE DWIGG", 0x31, "Hangul"),
    c(0xB4A7, None, "HANGUL SYLLABLE DWIGS", 0x31, "Hangul"),
    c(0xB4A8, None, "HANGUL SYLLABLE DWIN", 0x31, "Hangul"),
    c(0xB4A9, None, "HANGUL SYLLABLE DWINJ", 0x31, "Hangul"),
    c(0xB4AA, None, "HANGUL SYLLABLE DWINH", 0x31, "Hangul"),
    c(0xB4AB, None, "HANGUL SYLLABLE DWID", 0x31, "Hangul"),
    c(0xB4AC, None, "HANGUL SYLLABLE DWIL", 0x31, "Hangul"),
    c(0xB4AD, None, "HANGUL SYLLABLE DWILG", 0x31, "Hangul"),
    c(0xB4AE, None, "HANGUL SYLLABLE DWILM", 0x31, "Hangul"),
    c(0xB4AF, None, "HANGUL SYLLABLE DWILB", 0x31, "Hangul"),
    c(0xB4B0, None, "HANGUL SYLLABLE DWILS", 0x31, "Hangul"),
    c(0xB4B1, None, "HANGUL SYLLABLE DWILT", 0x31, "Hangul"),
    c(0xB4B2, None, "HANGUL SYLLABLE DWILP", 0x31, "Hangul"),
    c(0xB4B3, None, "HANGUL SYLLABLE DWILH", 0x31, "Hangul"),
    c(0xB4B4, None, "HANGUL SYLLABLE DWIM", 0x31, "Hangul"),
    c(0xB4B5, None, "HANGUL SYLLABLE DWIB", 0x31, "Hangul"),
    c(0xB4B6, None, "HANGUL SYLLABLE DWIBS", 0x31, "Hangul"),
    c(0xB4B7, None, "HANGUL SYLLABLE DWIS", 0x31, "Hangul"),
    c(0xB4B8, None, "HANGUL SYLLABLE DWISS", 0x31, "Hangul"),
    c(0xB4B9, None, "HANGUL SYLLABLE DWING", 0x31, "Hangul"),
    c(0xB4BA, None, "HANGUL SYLLABLE DWIJ", 0x31, "Hangul"),
    c(0xB4BB, None, "HANGUL SYLLABLE DWIC", 0x31, "Hangul"),
    c(0xB4BC, None, "HANGUL SYLLABLE DWIK", 0x31, "Hangul"),
    c(0xB4BD, None, "HANGUL SYLLABLE DWIT", 0x31, "Hangul"),
    c(0xB4BE, None, "HANGUL SYLLABLE DWIP", 0x31, "Hangul"),
    c(0xB4BF, None, "HANGUL SYLLABLE DWIH", 0x31, "Hangul"),
    c(0xB4C0, None, "HANGUL SYLLABLE DYU", 0x31, "Hangul"),
    c(0xB4C1, None, "HANGUL SYLLABLE DYUG", 0x31, "Hangul"),
    c(0xB4C2, None, "HANGUL SYLLABLE DYUGG", 0x31, "Hangul"),
    c(0xB4C3, None, "HANGUL SYLLABLE DYUGS", 0x31, "Hangul"),
    c(0xB4C4, None, "HANGUL SYLLABLE DYUN", 0x31, "Hangul"),
    c(0xB4C5, None, "HANGUL SYLLABLE DYUNJ", 0x31, "Hangul"),
    c(0xB4C6, None, "HANGUL SYLLABLE DYUNH", 0x31, "Hangul"),
    c(0xB4C7, None, "HANGUL SYLLABLE DYUD", 0x31, "Hangul"),
    c(0xB4C8, None, "HANGUL SYLLABLE DYUL", 0x31, "Hangul"),
    c(0xB4C9, None, "HANGUL SYLLABLE DYULG", 0x31, "Hangul"),
    c(0xB4CA, None, "HANGUL SYLLABLE DYULM", 0x31, "Hangul"),
    c(0xB4CB, None, "HANGUL SYLLABLE DYULB", 0x31, "Hangul"),
    c(0xB4CC, None, "HANGUL SYLLABLE DYULS", 0x31, "Hangul"),
    c(0xB4CD, None, "HANGUL SYLLABLE DYULT", 0x31, "Hangul"),
    c(0xB4CE, None, "HANGUL SYLLABLE DYULP", 0x31, "Hangul"),
    c(0xB4CF, None, "HANGUL SYLLABLE DYULH", 0x31, "Hangul"),
    c(0xB4D0, None, "HANGUL SYLLABLE DYUM", 0x31, "Hangul"),
    c(0xB4D1, None, "HANGUL SYLLABLE DYUB", 0x31, "Hangul"),
    c(0xB4D2, None, "HANGUL SYLLABLE DYUBS", 0x31, "Hangul"),
    c(0xB4D3, None, "HANGUL SYLLABLE DYUS", 0x31, "Hangul"),
    c(0xB4D4, None, "HANGUL SYLLABLE DYUSS", 0x31, "Hangul"),
    c(0xB4D5, None, "HANGUL SYLLABLE DYUNG", 0x31, "Hangul"),
    c(0xB4D6, None, "HANGUL SYLLABLE DYUJ", 0x31, "Hangul"),
    c(0xB4D7, None, "HANGUL SYLLABLE DYUC", 0x31, "Hangul"),
    c(0xB4D8, None, "HANGUL SYLLABLE DYUK", 0x31, "Hangul"),
    c(0xB4D9, None, "HANGUL SYLLABLE DYUT", 0x31, "Hangul"),
    c(0xB4DA, None, "HANGUL SYLLABLE DYUP", 0x31, "Hangul"),
    c(0xB4DB, None, "HANGUL SYLLABLE DYUH", 0x31, "Hangul"),
    c(0xB4DC, None, "HANGUL SYLLABLE DEU", 0x31, "Hangul"),
    c(0xB4DD, None, "HANGUL SYLLABLE DEUG", 0x31, "Hangul"),
    c(0xB4DE, None, "HANGUL SYLLABLE DEUGG", 0x31, "Hangul"),
    c(0xB4DF, None, "HANGUL SYLLABLE DEUGS", 0x31, "Hangul"),
    c(0xB4E0, None, "HANGUL SYLLABLE DEUN", 0x31, "Hangul"),
    c(0xB4E1, None, "HANGUL SYLLABLE DEUNJ", 0x31, "Hangul"),
    c(0xB4E2, None, "HANGUL SYLLABLE DEUNH", 0x31, "Hangul"),
    c(0xB4E3, None, "HANGUL SYLLABLE DEUD", 0x31, "Hangul"),
    c(0xB4E4, None, "HANGUL SYLLABLE DEUL", 0x31, "Hangul"),
    c(0xB4E5, None, "HANGUL SYLLABLE DEULG", 0x31, "Hangul"),
    c(0xB4E6, None, "HANGUL SYLLABLE DEULM", 0x31, "Hangul"),
    c(0xB4E7, None, "HANGUL SYLLABLE DEULB", 0x31, "Hangul"),
    c(0xB4E8, None, "HANGUL SYLLABLE DEULS", 0x31, "Hangul"),
    c(0xB4E9, None, "HANGUL SYLLABLE DEULT", 0x31, "Hangul"),
    c(0xB4EA, None, "HANGUL SYLLABLE DEULP", 0x31, "Hangul"),
    c(0xB4EB, None, "HANGUL SYLLABLE DEULH", 0x31, "Hangul"),
    c(0xB4EC, None, "HANGUL SYLLABLE DEUM", 0x31, "Hangul"),
    c(0xB4ED, None, "HANGUL SYLLABLE DEUB", 0x31, "Hangul"),
    c(0xB4EE, None, "HANGUL SYLLABLE DEUBS", 0x31, "Hangul"),
    c(0xB4EF, None, "HANGUL SYLLABLE DEUS", 0x31, "Hangul"),
    c(0xB4F0, None, "HANGUL SYLLABLE DEUSS", 0x31, "Hangul"),
    c(0xB4F1, None, "HANGUL SYLLABLE DEUNG", 0x31, "Hangul"),
    c(0xB4F2, None, "HANGUL SYLLABLE DEUJ", 0x31, "Hangul"),
    c(0xB4F3, None, "HANGUL SYLLABLE DEUC", 0x31, "Hangul"),
    c(0xB4F4, None, "HANGUL SYLLABLE DEUK", 0x31, "Hangul"),
    c(0xB4F5, None, "HANGUL SYLLABLE DEUT", 0x31, "Hangul"),
    c(0xB4F6, None, "HANGUL SYLLABLE DEUP", 0x31, "Hangul"),
    c(0xB4F7, None, "HANGUL SYLLABLE DEUH", 0x31, "Hangul"),
    c(0xB4F8, None, "HANGUL SYLLABLE DYI", 0x31, "Hangul"),
    c(0xB4F9, None, "HANGUL SYLLABLE DYIG", 0x31, "Hangul"),
    c(0xB4FA, None, "HANGUL SYLLABLE DYIGG", 0x31, "Hangul"),
    c(0xB4FB, None, "HANGUL SYLLABLE DYIGS", 0x31, "Hangul"),
    c(0xB4FC, None, "HANGUL SYLLABLE DYIN", 0x31, "Hangul"),
    c(0xB4FD, None, "HANGUL SYLLABLE DYINJ", 0x31, "Hangul"),
    c(0xB4FE, None, "HANGUL SYLLABLE DYINH", 0x31, "Hangul"),
    c(0xB4FF, None, "HANGUL SYLLABLE DYID", 0x31, "Hangul"),
    c(0xB500, None, "HANGUL SYLLABLE DYIL", 0x31, "Hangul"),
    c(0xB501, None, "HANGUL SYLLABLE DYILG", 0x31, "Hangul"),
    c(0xB502, None, "HANGUL SYLLABLE DYILM", 0x31, "Hangul"),
    c(0xB503, None, "HANGUL SYLLABLE DYILB", 0x31, "Hangul"),
    c(0xB504, None, "HANGUL SYLLABLE DYILS", 0x31, "Hangul"),
    c(0xB505, None, "HANGUL SYLLABLE DYILT", 0x31, "Hangul"),
    c(0xB506, None, "HANGUL SYLLABLE DYILP", 0x31, "Hangul"),
    c(0xB507, None, "HANGUL SYLLABLE DYILH", 0x31, "Hangul"),
    c(0xB508, None, "HANGUL SYLLABLE DYIM", 0x31, "Hangul"),
    c(0xB509, None, "HANGUL SYLLABLE DYIB", 0x31, "Hangul"),
    c(0xB50A, None, "HANGUL SYLLABLE DYIBS", 0x31, "Hangul"),
    c(0xB50B, None, "HANGUL SYLLABLE DYIS", 0x31, "Hangul"),
    c(0xB50C, None, "HANGUL SYLLABLE DYISS", 0x31, "Hangul"),
    c(0xB50D, None, "HANGUL SYLLABLE DYING", 0x31, "Hangul"),
    c(0xB50E, None, "HANGUL SYLLABLE DYIJ", 0x31, "Hangul"),
    c(0xB50F, None, "HANGUL SYLLABLE DYIC", 0x31, "Hangul"),
    c(0xB510, None, "HANGUL SYLLABLE DYIK", 0x31, "Hangul"),
    c(0xB511, None, "HANGUL SYLLABLE DYIT", 0x31, "Hangul"),
    c(0xB512, None, "HANGUL SYLLABLE DYIP", 0x31, "Hangul"),
    c(0xB513, None, "HANGUL SYLLABLE DYIH", 0x31, "Hangul"),
    c(0xB514, None, "HANGUL SYLLABLE DI", 0x31, "Hangul"),
    c(0xB515, None, "HANGUL SYLLABLE DIG", 0x31, "Hangul"),
    c(0xB516, None, "HANGUL SYLLABLE DIGG", 0x31, "Hangul"),
    c(0xB517, None, "HANGUL SYLLABLE DIGS", 0x31, "Hangul"),
    c(0xB518, None, "HANGUL SYLLABLE DIN", 0x31, "Hangul"),
    c(0xB519, None, "HANGUL SYLLABLE DINJ", 0x31, "Hangul"),
    c(0xB51A, None, "HANGUL SYLLABLE DINH", 0x31, "Hangul"),
    c(0xB51B, None, "HANGUL SYLLABLE DID", 0x31, "Hangul"),
    c(0xB51C, None, "HANGUL SYLLABLE DIL", 0x31, "Hangul"),
    c(0xB51D, None, "HANGUL SYLLABLE DILG", 0x31, "Hangul"),
    c(0xB51E, None, "HANGUL SYLLABLE DILM", 0x31, "Hangul"),
    c(0xB51F, None, "HANGUL SYLLABLE DILB", 0x31, "Hangul"),
    c(0xB520, None, "HANGUL SYLLABLE DILS", 0x31, "Hangul"),
    c(0xB521, None, "HANGUL SYLLABLE DILT", 0x31, "Hangul"),
    c(0xB522, None, "HANGUL SYLLABLE DILP", 0x31, "Hangul"),
    c(0xB523, None, "HANGUL SYLLABLE DILH", 0x31, "Hangul"),
    c(0xB524, None, "HANGUL SYLLABLE DIM", 0x31, "Hangul"),
    c(0xB525, None, "HANGUL SYLLABLE DIB", 0x31, "Hangul"),
    c(0xB526, None, "HANGUL SYLLABLE DIBS", 0x31, "Hangul"),
    c(0xB527, None, "HANGUL SYLLABLE DIS", 0x31, "Hangul"),
    c(0xB528, None, "HANGUL SYLLABLE DISS", 0x31, "Hangul"),
    c(0xB529, None, "HANGUL SYLLABLE DING", 0x31, "Hangul"),
    c(0xB52A, None, "HANGUL SYLLABLE DIJ", 0x31, "Hangul"),
    c(0xB52B, None, "HANGUL SYLLABLE DIC", 0x31, "Hangul"),
    c(0xB52C, None, "HANGUL SYLLABLE DIK", 0x31, "Hangul"),
    c(0xB52D, None, "HANGUL SYLLABLE DIT", 0x31, "Hangul"),
    c(0xB52E, None, "HANGUL SYLLABLE DIP", 0x31, "Hangul"),
    c(0xB52F, None, "HANGUL SYLLABLE DIH", 0x31, "Hangul"),
    c(0xB530, None, "HANGUL SYLLABLE DDA", 0x31, "Hangul"),
    c(0xB531, None, "HANGUL SYLLABLE DDAG", 0x31, "Hangul"),
    c(0xB532, None, "HANGUL SYLLABLE DDAGG", 0x31, "Hangul"),
    c(0xB533, None, "HANGUL SYLLABLE DDAGS", 0x31, "Hangul"),
    c(0xB534, None, "HANGUL SYLLABLE DDAN", 0x31, "Hangul"),
    c(0xB535, None, "HANGUL SYLLABLE DDANJ", 0x31, "Hangul"),
    c(0xB536, None, "HANGUL SYLLABLE DDANH", 0x31, "Hangul"),
    c(0xB537, None, "HANGUL SYLLABLE DDAD", 0x31, "Hangul"),
    c(0xB538, None, "HANGUL SYLLABLE DDAL", 0x31, "Hangul"),
    c(0xB539, None, "HANGUL SYLLABLE DDALG", 0x31, "Hangul"),
    c(0xB53A, None, "HANGUL SYLLABLE DDALM", 0x31, "Hangul"),
    c(0xB53B, None, "HANGUL SYLLABLE DDALB", 0x31, "Hangul"),
    c(0xB53C, None, "HANGUL SYLLABLE DDALS", 0x31, "Hangul"),
    c(0xB53D, None, "HANGUL SYLLABLE DDALT", 0x31, "Hangul"),
    c(0xB53E, None, "HANGUL SYLLABLE DDALP", 0x31, "Hangul"),
    c(0xB53F, None, "HANGUL SYLLABLE DDALH", 0x31, "Hangul"),
    c(0xB540, None, "HANGUL SYLLABLE DDAM", 0x31, "Hangul"),
    c(0xB541, None, "HANGUL SYLLABLE DDAB", 0x31, "Hangul"),
    c(0xB542, None, "HANGUL SYLLABLE DDABS", 0x31, "Hangul"),
    c(0xB543, None, "HANGUL SYLLABLE DDAS", 0x31, "Hangul"),
    c(0xB544, None, "HANGUL SYLLABLE DDASS", 0x31, "Hangul"),
    c(0xB545, None, "HANGUL SYLLABLE DDANG", 0x31, "Hangul"),
    c(0xB546, None, "HANGUL SYLLABLE DDAJ", 0x31, "Hangul"),
    c(0xB547, None, "HANGUL SYLLABLE DDAC", 0x31, "Hangul"),
    c(0xB548, None, "HANGUL SYLLABLE DDAK", 0x31, "Hangul"),
    c(0xB549, None, "HANGUL SYLLABLE DDAT", 0x31, "Hangul"),
    c(0xB54A, None, "HANGUL SYLLABLE DDAP", 0x31, "Hangul"),
    c(0xB54B, None, "HANGUL SYLLABLE DDAH", 0x31, "Hangul"),
    c(0xB54C, None, "HANGUL SYLLABLE DDAE", 0x31, "Hangul"),
    c(0xB54D, None, "HANGUL SYLLABLE DDAEG", 0x31, "Hangul"),
    c(0xB54E, None, "HANGUL SYLLABLE DDAEGG", 0x31, "Hangul"),
    c(0xB54F, None, "HANGUL SYLLABLE DDAEGS", 0x31, "Hangul"),
    c(0xB550, None, "HANGUL SYLLABLE DDAEN", 0x31, "Hangul"),
    c(0xB551, None, "HANGUL SYLLABLE DDAENJ", 0x31, "Hangul"),
    c(0xB552, None, "HANGUL SYLLABLE DDAENH", 0x31, "Hangul"),
    c(0xB553, None, "HANGUL SYLLABLE DDAED", 0x31, "Hangul"),
    c(0xB554, None, "HANGUL SYLLABLE DDAEL", 0x31, "Hangul"),
    c(0xB555, None, "HANGUL SYLLABLE DDAELG", 0x31, "Hangul"),
    c(0xB556, None, "HANGUL SYLLABLE DDAELM", 0x31, "Hangul"),
    c(0xB557, None, "HANGUL SYLLABLE DDAELB", 0x31, "Hangul"),
    c(0xB558, None, "HANGUL SYLLABLE DDAELS", 0x31, "Hangul"),
    c(0xB559, None, "HANGUL SYLLABLE DDAELT", 0x31, "Hangul"),
    c(0xB55A, None, "HANGUL SYLLABLE DDAELP", 0x31, "Hangul"),
    c(0xB55B, None, "HANGUL SYLLABLE DDAELH", 0x31, "Hangul"),
    c(0xB55C, None, "HANGUL SYLLABLE DDAEM", 0x31, "Hangul"),
    c(0xB55D, None, "HANGUL SYLLABLE DDAEB", 0x31, "Hangul"),
    c(0xB55E, None, "HANGUL SYLLABLE DDAEBS", 0x31, "Hangul"),
    c(0xB55F, None, "HANGUL SYLLABLE DDAES", 0x31, "Hangul"),
    c(0xB560, None, "HANGUL SYLLABLE DDAESS", 0x31, "Hangul"),
    c(0xB561, None, "HANGUL SYLLABLE DDAENG", 0x31, "Hangul"),
    c(0xB562, None, "HANGUL SYLLABLE DDAEJ", 0x31, "Hangul"),
    c(0xB563, None, "HANGUL SYLLABLE DDAEC", 0x31, "Hangul"),
    c(0xB564, None, "HANGUL SYLLABLE DDAEK", 0x31, "Hangul"),
    c(0xB565, None, "HANGUL SYLLABLE DDAET", 0x31, "Hangul"),
    c(0xB566, None, "HANGUL SYLLABLE DDAEP", 0x31, "Hangul"),
    c(0xB567, None, "HANGUL SYLLABLE DDAEH", 0x31, "Hangul"),
    c(0xB568, None, "HANGUL SYLLABLE DDYA", 0x31, "Hangul"),
    c(0xB569, None, "HANGUL SYLLABLE DDYAG", 0x31, "Hangul"),
    c(0xB56A, None, "HANGUL SYLLABLE DDYAGG", 0x31, "Hangul"),
    c(0xB56B, None, "HANGUL SYLLABLE DDYAGS", 0x31, "Hangul"),
    c(0xB56C, None, "HANGUL SYLLABLE DDYAN", 0x31, "Hangul"),
    c(0xB56D, None, "HANGUL SYLLABLE DDYANJ", 0x31, "Hangul"),
    c(0xB56E, None, "HANGUL SYLLABLE DDYANH", 0x31, "Hangul"),
    c(0xB56F, None, "HANGUL SYLLABLE DDYAD", 0x31, "Hangul"),
    c(0xB570, None, "HANGUL SYLLABLE DDYAL", 0x31, "Hangul"),
    c(0xB571, None, "HANGUL SYLLABLE DDYALG", 0x31, "Hangul"),
    c(0xB572, None, "HANGUL SYLLABLE DDYALM", 0x31, "Hangul"),
    c(0xB573, None, "HANGUL SYLLABLE DDYALB", 0x31, "Hangul"),
    c(0xB574, None, "HANGUL SYLLABLE DDYALS", 0x31, "Hangul"),
    c(0xB575, None, "HANGUL SYLLABLE DDYALT", 0x31, "Hangul"),
    c(0xB576, None, "HANGUL SYLLABLE DDYALP", 0x31, "Hangul"),
    c(0xB577, None, "HANGUL SYLLABLE DDYALH", 0x31, "Hangul"),
    c(0xB578, None, "HANGUL SYLLABLE DDYAM", 0x31, "Hangul"),
    c(0xB579, None, "HANGUL SYLLABLE DDYAB", 0x31, "Hangul"),
    c(0xB57A, None, "HANGUL SYLLABLE DDYABS", 0x31, "Hangul"),
    c(0xB57B, None, "HANGUL SYLLABLE DDYAS", 0x31, "Hangul"),
    c(0xB57C, None, "HANGUL SYLLABLE DDYASS", 0x31, "Hangul"),
    c(0xB57D, None, "HANGUL SYLLABLE DDYANG", 0x31, "Hangul"),
    c(0xB57E, None, "HANGUL SYLLABLE DDYAJ", 0x31, "Hangul"),
    c(0xB57F, None, "HANGUL SYLLABLE DDYAC", 0x31, "Hangul"),
    c(0xB580, None, "HANGUL SYLLABLE DDYAK", 0x31, "Hangul"),
    c(0xB581, None, "HANGUL SYLLABLE DDYAT", 0x31, "Hangul"),
    c(0xB582, None, "HANGUL SYLLABLE DDYAP", 0x31, "Hangul"),
    c(0xB583, None, "HANGUL SYLLABLE DDYAH", 0x31, "Hangul"),
    c(0xB584, None, "HANGUL SYLLABLE DDYAE", 0x31, "Hangul"),
    c(0xB585, None, "HANGUL SYLLABLE DDYAEG", 0x31, "Hangul"),
    c(0xB586, None, "HANGUL SYLLABLE DDYAEGG", 0x31, "Hangul"),
    c(0xB587, None, "HANGUL SYLLABLE DDYAEGS", 0x31, "Hangul"),
    c(0xB588, None, "HANGUL SYLLABLE DDYAEN", 0x31, "Hangul"),
    c(0xB589, None, "HANGUL SYLLABLE DDYAENJ", 0x31, "Hangul"),
    c(0xB58A, None, "HANGUL SYLLABLE DDYAENH", 0x31, "Hangul"),
    c(0xB58B, None, "HANGUL SYLLABLE DDYAED", 0x31, "Hangul"),
    c(0xB58C, None, "HANGUL SYLLABLE DDYAEL", 0x31, "Hangul"),
    c(0xB58D, None, "HANGUL SYLLABLE DDYAELG", 0x31, "Hangul"),
    c(0xB58E, None, "HANGUL SYLLABLE DDYAELM", 0x31, "Hangul"),
    c(0xB58F, None, "HANGUL SYLLABLE DDYAELB", 0x31, "Hangul"),
    c(0xB590, None, "HANGUL SYLLABLE DDYAELS", 0x31, "Hangul"),
    c(0xB591, None, "HANGUL SYLLABLE DDYAELT", 0x31, "Hangul"),
    c(0xB592, None, "HANGUL SYLLABLE DDYAELP", 0x31, "Hangul"),
    c(0xB593, None, "HANGUL SYLLABLE DDYAELH", 0x31, "Hangul"),
    c(0xB594, None, "HANGUL SYLLABLE DDYAEM", 0x31, "Hangul"),
    c(0xB595, None, "HANGUL SYLLABLE DDYAEB", 0x31, "Hangul"),
    c(0xB596, None, "HANGUL SYLLABLE DDYAEBS", 0x31, "Hangul"),
    c(0xB597, None, "HANGUL SYLLABLE DDYAES", 0x31, "Hangul"),
    c(0xB598, None, "HANGUL SYLLABLE DDYAESS", 0x31, "Hangul"),
    c(0xB599, None, "HANGUL SYLLABLE DDYAENG", 0x31, "Hangul"),
    c(0xB59A, None, "HANGUL SYLLABLE DDYAEJ", 0x31, "Hangul"),
    c(0xB59B, None, "HANGUL SYLLABLE DDYAEC", 0x31, "Hangul"),
    c(0xB59C, None, "HANGUL SYLLABLE DDYAEK", 0x31, "Hangul"),
    c(0xB59D, None, "HANGUL SYLLABLE DDYAET", 0x31, "Hangul"),
    c(0xB59E, None, "HANGUL SYLLABLE DDYAEP", 0x31, "Hangul"),
    c(0xB59F, None, "HANGUL SYLLABLE DDYAEH", 0x31, "Hangul"),
    c(0xB5A0, None, "HANGUL SYLLABLE DDEO", 0x31, "Hangul"),
    c(0xB5A1, None, "HANGUL SYLLABLE DDEOG", 0x31, "Hangul"),
    c(0xB5A2, None, "HANGUL SYLLABLE DDEOGG", 0x31, "Hangul"),
    c(0xB5A3, None, "HANGUL SYLLABLE DDEOGS", 0x31, "Hangul"),
    c(0xB5A4, None, "HANGUL SYLLABLE DDEON", 0x31, "Hangul"),
    c(0xB5A5, None, "HANGUL SYLLABLE DDEONJ", 0x31, "Hangul"),
    c(0xB5A6, None, "HANGUL SYLLABLE DDEONH", 0x31, "Hangul"),
    c(0xB5A7, None, "HANGUL SYLLABLE DDEOD", 0x31, "Hangul"),
    c(0xB5A8, None, "HANGUL SYLLABLE DDEOL", 0x31, "Hangul"),
    c(0xB5A9, None, "HANGUL SYLLABLE DDEOLG", 0x31, "Hangul"),
    c(0xB5AA, None, "HANGUL SYLLABLE DDEOLM", 0x31, "Hangul"),
    c(0xB5AB, None, "HANGUL SYLLABLE DDEOLB", 0x31, "Hangul"),
    c(0xB5AC, None, "HANGUL SYLLABLE DDEOLS", 0x31, "Hangul"),
    c(0xB5AD, None, "HANGUL SYLLABLE DDEOLT", 0x31, "Hangul"),
    c(0xB5AE, None, "HANGUL SYLLABLE DDEOLP", 0x31, "Hangul"),
    c(0xB5AF, None, "HANGUL SYLLABLE DDEOLH", 0x31, "Hangul"),
    c(0xB5B0, None, "HANGUL SYLLABLE DDEOM", 0x31, "Hangul"),
    c(0xB5B1, None, "HANGUL SYLLABLE DDEOB", 0x31, "Hangul"),
    c(0xB5B2, None, "HANGUL SYLLABLE DDEOBS", 0x31, "Hangul"),
    c(0xB5B3, None, "HANGUL SYLLABLE DDEOS", 0x31, "Hangul"),
    c(0xB5B4, None, "HANGUL SYLLABLE DDEOSS", 0x31, "Hangul"),
    c(0xB5B5, None, "HANGUL SYLLABLE DDEONG", 0x31, "Hangul"),
    c(0xB5B6, None, "HANGUL SYLLABLE DDEOJ", 0x31, "Hangul"),
    c(0xB5B7, None, "HANGUL SYLLABLE DDEOC", 0x31, "Hangul"),
    c(0xB5B8, None, "HANGUL SYLLABLE DDEOK", 0x31, "Hangul"),
    c(0xB5B9, None, "HANGUL SYLLABLE DDEOT", 0x31, "Hangul"),
    c(0xB5BA, None, "HANGUL SYLLABLE DDEOP", 0x31, "Hangul"),
    c(0xB5BB, None, "HANGUL SYLLABLE DDEOH", 0x31, "Hangul"),
    c(0xB5BC, None, "HANGUL SYLLABLE DDE", 0x31, "Hangul"),
    c(0xB5BD, None, "HANGUL SYLLABLE DDEG", 0x31, "Hangul"),
    c(0xB5BE, None, "HANGUL SYLLABLE DDEGG", 0x31, "Hangul"),
    c(0xB5BF, None, "HANGUL SYLLABLE DDEGS", 0x31, "Hangul"),
    c(0xB5C0, None, "HANGUL SYLLABLE DDEN", 0x31, "Hangul"),
    c(0xB5C1, None, "HANGUL SYLLABLE DDENJ", 0x31, "Hangul"),
    c(0xB5C2, None, "HANGUL SYLLABLE DDENH", 0x31, "Hangul"),
    c(0xB5C3, None, "HANGUL SYLLABLE DDED", 0x31, "Hangul"),
    c(0xB5C4, None, "HANGUL SYLLABLE DDEL", 0x31, "Hangul"),
    c(0xB5C5, None, "HANGUL SYLLABLE DDELG", 0x31, "Hangul"),
    c(0xB5C6, None, "HANGUL SYLLABLE DDELM", 0x31, "Hangul"),
    c(0xB5C7, None, "HANGUL SYLLABLE DDELB", 0x31, "Hangul"),
    c(0xB5C8, None, "HANGUL SYLLABLE DDELS", 0x31, "Hangul"),
    c(0xB5C9, None, "HANGUL SYLLABLE DDELT", 0x31, "Hangul"),
    c(0xB5CA, None, "HANGUL SYLLABLE DDELP", 0x31, "Hangul"),
    c(0xB5CB, None, "HANGUL SYLLABLE DDELH", 0x31, "Hangul"),
    c(0xB5CC, None, "HANGUL SYLLABLE DDEM", 0x31, "Hangul"),
    c(0xB5CD, None, "HANGUL SYLLABLE DDEB", 0x31, "Hangul"),
    c(0xB5CE, None, "HANGUL SYLLABLE DDEBS", 0x31, "Hangul"),
    c(0xB5CF, None, "HANGUL SYLLABLE DDES", 0x31, "Hangul"),
    c(0xB5D0, None, "HANGUL SYLLABLE DDESS", 0x31, "Hangul"),
    c(0xB5D1, None, "HANGUL SYLLABLE DDENG", 0x31, "Hangul"),
    c(0xB5D2, None, "HANGUL SYLLABLE DDEJ", 0x31, "Hangul"),
    c(0xB5D3, None, "HANGUL SYLLABLE DDEC", 0x31, "Hangul"),
    c(0xB5D4, None, "HANGUL SYLLABLE DDEK", 0x31, "Hangul"),
    c(0xB5D5, None, "HANGUL SYLLABLE DDET", 0x31, "Hangul"),
    c(0xB5D6, None, "HANGUL SYLLABLE DDEP", 0x31, "Hangul"),
    c(0xB5D7, None, "HANGUL SYLLABLE DDEH", 0x31, "Hangul"),
    c(0xB5D8, None, "HANGUL SYLLABLE DDYEO", 0x31, "Hangul"),
    c(0xB5D9, None, "HANGUL SYLLABLE DDYEOG", 0x31, "Hangul"),
    c(0xB5DA, None, "HANGUL SYLLABLE DDYEOGG", 0x31, "Hangul"),
    c(0xB5DB, None, "HANGUL SYLLABLE DDYEOGS", 0x31, "Hangul"),
    c(0xB5DC, None, "HANGUL SYLLABLE DDYEON", 0x31, "Hangul"),
    c(0xB5DD, None, "HANGUL SYLLABLE DDYEONJ", 0x31, "Hangul"),
    c(0xB5DE, None, "HANGUL SYLLABLE DDYEONH", 0x31, "Hangul"),
    c(0xB5DF, None, "HANGUL SYLLABLE DDYEOD", 0x31, "Hangul"),
    c(0xB5E0, None, "HANGUL SYLLABLE DDYEOL", 0x31, "Hangul"),
    c(0xB5E1, None, "HANGUL SYLLABLE DDYEOLG", 0x31, "Hangul"),
    c(0xB5E2, None, "HANGUL SYLLABLE DDYEOLM", 0x31, "Hangul"),
    c(0xB5E3, None, "HANGUL SYLLABLE DDYEOLB", 0x31, "Hangul"),
    c(0xB5E4, None, "HANGUL SYLLABLE DDYEOLS", 0x31, "Hangul"),
    c(0xB5E5, None, "HANGUL SYLLABLE DDYEOLT", 0x31, "Hangul"),
    c(0xB5E6, None, "HANGUL SYLLABLE DDYEOLP", 0x31, "Hangul"),
    c(0xB5E7, None, "HANGUL SYLLABLE DDYEOLH", 0x31, "Hangul"),
    c(0xB5E8, None, "HANGUL SYLLABLE DDYEOM", 0x31, "Hangul"),
    c(0xB5E9, None, "HANGUL SYLLABLE DDYEOB", 0x31, "Hangul"),
    c(0xB5EA, None, "HANGUL SYLLABLE DDYEOBS", 0x31, "Hangul"),
    c(0xB5EB, None, "HANGUL SYLLABLE DDYEOS", 0x31, "Hangul"),
    c(0xB5EC, None, "HANGUL SYLLABLE DDYEOSS", 0x31, "Hangul"),
    c(0xB5ED, None, "HANGUL SYLLABLE DDYEONG", 0x31, "Hangul"),
    c(0xB5EE, None, "HANGUL SYLLABLE DDYEOJ", 0x31, "Hangul"),
    c(0xB5EF, None, "HANGUL SYLLABLE DDYEOC", 0x31, "Hangul"),
    c(0xB5F0, None, "HANGUL SYLLABLE DDYEOK", 0x31, "Hangul"),
    c(0xB5F1, None, "HANGUL SYLLABLE DDYEOT", 0x31, "Hangul"),
    c(0xB5F2, None, "HANGUL SYLLABLE DDYEOP", 0x31, "Hangul"),
    c(0xB5F3, None, "HANGUL SYLLABLE DDYEOH", 0x31, "Hangul"),
    c(0xB5F4, None, "HANGUL SYLLABLE DDYE", 0x31, "Hangul"),
    c(0xB5F5, None, "HANGUL SYLLABLE DDYEG", 0x31, "Hangul"),
    c(0xB5F6, None, "HANGUL SYLLABLE DDYEGG", 0x31, "Hangul"),
    c(0xB5F7, None, "HANGUL SYLLABLE DDYEGS", 0x31, "Hangul"),
    c(0xB5F8, None, "HANGUL SYLLABLE DDYEN", 0x31, "Hangul"),
    c(0xB5F9, None, "HANGUL SYLLABLE DDYENJ", 0x31, "Hangul"),
    c(0xB5FA, None, "HANGUL SYLLABLE DDYENH", 0x31, "Hangul"),
    c(0xB5FB, None, "HANGUL SYLLABLE DDYED", 0x31, "Hangul"),
    c(0xB5FC, None, "HANGUL SYLLABLE DDYEL", 0x31, "Hangul"),
    c(0xB5FD, None, "HANGUL SYLLABLE DDYELG", 0x31, "Hangul"),
    c(0xB5FE, None, "HANGUL SYLLABLE DDYELM", 0x31, "Hangul"),
    c(0xB5FF, None, "HANGUL SYLLABLE DDYELB", 0x31, "Hangul"),
    c(0xB600, None, "HANGUL SYLLABLE DDYELS", 0x31, "Hangul"),
    c(0xB601, None, "HANGUL SYLLABLE DDYELT", 0x31, "Hangul"),
    c(0xB602, None, "HANGUL SYLLABLE DDYELP", 0x31, "Hangul"),
    c(0xB603, None, "HANGUL SYLLABLE DDYELH", 0x31, "Hangul"),
    c(0xB604, None, "HANGUL SYLLABLE DDYEM", 0x31, "Hangul"),
    c(0xB605, None, "HANGUL SYLLABLE DDYEB", 0x31, "Hangul"),
    c(0xB606, None, "HANGUL SYLLABLE DDYEBS", 0x31, "Hangul"),
    c(0xB607, None, "HANGUL SYLLABLE DDYES", 0x31, "Hangul"),
    c(0xB608, None, "HANGUL SYLLABLE DDYESS", 0x31, "Hangul"),
    c(0xB609, None, "HANGUL SYLLABLE DDYENG", 0x31, "Hangul"),
    c(0xB60A, None, "HANGUL SYLLABLE DDYEJ", 0x31, "Hangul"),
    c(0xB60B, None, "HANGUL SYLLABLE DDYEC", 0x31, "Hangul"),
    c(0xB60C, None, "HANGUL SYLLABLE DDYEK", 0x31, "Hangul"),
    c(0xB60D, None, "HANGUL SYLLABLE DDYET", 0x31, "Hangul"),
    c(0xB60E, None, "HANGUL SYLLABLE DDYEP", 0x31, "Hangul"),
    c(0xB60F, None, "HANGUL SYLLABLE DDYEH", 0x31, "Hangul"),
    c(0xB610, None, "HANGUL SYLLABLE DDO", 0x31, "Hangul"),
    c(0xB611, None, "HANGUL SYLLABLE DDOG", 0x31, "Hangul"),
    c(0xB612, None, "HANGUL SYLLABLE DDOGG", 0x31, "Hangul"),
    c(0xB613, None, "HANGUL SYLLABLE DDOGS", 0x31, "Hangul"),
    c(0xB614, None, "HANGUL SYLLABLE DDON", 0x31, "Hangul"),
    c(0xB615, None, "HANGUL SYLLABLE DDONJ", 0x31, "Hangul"),
    c(0xB616, None, "HANGUL SYLLABLE DDONH", 0x31, "Hangul"),
    c(0xB617, None, "HANGUL SYLLABLE DDOD", 0x31, "Hangul"),
    c(0xB618, None, "HANGUL SYLLABLE DDOL", 0x31, "Hangul"),
    c(0xB619, None, "HANGUL SYLLABLE DDOLG", 0x31, "Hangul"),
    c(0xB61A, None, "HANGUL SYLLABLE DDOLM", 0x31, "Hangul"),
    c(0xB61B, None, "HANGUL SYLLABLE DDOLB", 0x31, "Hangul"),
    c(0xB61C, None, "HANGUL SYLLABLE DDOLS", 0x31, "Hangul"),
    c(0xB61D, None, "HANGUL SYLLABLE DDOLT", 0x31, "Hangul"),
    c(0xB61E, None, "HANGUL SYLLABLE DDOLP", 0x31, "Hangul"),
    c(0xB61F, None, "HANGUL SYLLABLE DDOLH", 0x31, "Hangul"),
    c(0xB620, None, "HANGUL SYLLABLE DDOM", 0x31, "Hangul"),
    c(0xB621, None, "HANGUL SYLLABLE DDOB", 0x31, "Hangul"),
    c(0xB622, None, "HANGUL SYLLABLE DDOBS", 0x31, "Hangul"),
    c(0xB623, None, "HANGUL SYLLABLE DDOS", 0x31, "Hangul"),
    c(0xB624, None, "HANGUL SYLLABLE DDOSS", 0x31, "Hangul"),
    c(0xB625, None, "HANGUL SYLLABLE DDONG", 0x31, "Hangul"),
    c(0xB626, None, "HANGUL SYLLABLE DDOJ", 0x31, "Hangul"),
    c(0xB627, None, "HANGUL SYLLABLE DDOC", 0x31, "Hangul"),
    c(0xB628, None, "HANGUL SYLLABLE DDOK", 0x31, "Hangul"),
    c(0xB629, None, "HANGUL SYLLABLE DDOT", 0x31, "Hangul"),
    c(0xB62A, None, "HANGUL SYLLABLE DDOP", 0x31, "Hangul"),
    c(0xB62B, None, "HANGUL SYLLABLE DDOH", 0x31, "Hangul"),
    c(0xB62C, None, "HANGUL SYLLABLE DDWA", 0x31, "Hangul"),
    c(0xB62D, None, "HANGUL SYLLABLE DDWAG", 0x31, "Hangul"),
    c(0xB62E, None, "HANGUL SYLLABLE DDWAGG", 0x31, "Hangul"),
    c(0xB62F, None, "HANGUL SYLLABLE DDWAGS", 0x31, "Hangul"),
    c(0xB630, None, "HANGUL SYLLABLE DDWAN", 0x31, "Hangul"),
    c(0xB631, None, "HANGUL SYLLABLE DDWANJ", 0x31, "Hangul"),
    c(0xB632, None, "HANGUL SYLLABLE DDWANH", 0x31, "Hangul"),
    c(0xB633, None, "HANGUL SYLLABLE DDWAD", 0x31, "Hangul"),
    c(0xB634, None, "HANGUL SYLLABLE DDWAL", 0x31, "Hangul"),
    c(0xB635, None, "HANGUL SYLLABLE DDWALG", 0x31, "Hangul"),
    c(0xB636, None, "HANGUL SYLLABLE DDWALM", 0x31, "Hangul"),
    c(0xB637, None, "HANGUL SYLLABLE DDWALB", 0x31, "Hangul"),
    c(0xB638, None, "HANGUL SYLLABLE DDWALS", 0x31, "Hangul"),
    c(0xB639, None, "HANGUL SYLLABLE DDWALT", 0x31, "Hangul"),
    c(0xB63A, None, "HANGUL SYLLABLE DDWALP", 0x31, "Hangul"),
    c(0xB63B, None, "HANGUL SYLLABLE DDWALH", 0x31, "Hangul"),
    c(0xB63C, None, "HANGUL SYLLABLE DDWAM", 0x31, "Hangul"),
    c(0xB63D, None, "HANGUL SYLLABLE DDWAB", 0x31, "Hangul"),
    c(0xB63E, None, "HANGUL SYLLABLE DDWABS", 0x31, "Hangul"),
    c(0xB63F, None, "HANGUL SYLLABLE DDWAS", 0x31, "Hangul"),
    c(0xB640, None, "HANGUL SYLLABLE DDWASS", 0x31, "Hangul"),
    c(0xB641, None, "HANGUL SYLLABLE DDWANG", 0x31, "Hangul"),
    c(0xB642, None, "HANGUL SYLLABLE DDWAJ", 0x31, "Hangul"),
    c(0xB643, None, "HANGUL SYLLABLE DDWAC", 0x31, "Hangul"),
    c(0xB644, None, "HANGUL SYLLABLE DDWAK", 0x31, "Hangul"),
    c(0xB645, None, "HANGUL SYLLABLE DDWAT", 0x31, "Hangul"),
    c(0xB646, None, "HANGUL SYLLABLE DDWAP", 0x31, "Hangul"),
    c(0xB647, None, "HANGUL SYLLABLE DDWAH", 0x31, "Hangul"),
    c(0xB648, None, "HANGUL SYLLABLE DDWAE", 0x31, "Hangul"),
    c(0xB649, None, "HANGUL SYLLABLE DDWAEG", 0x31, "Hangul"),
    c(0xB64A, None, "HANGUL SYLLABLE DDWAEGG", 0x31, "Hangul"),
    c(0xB64B, None, "HANGUL SYLLABLE DDWAEGS", 0x31, "Hangul"),
    c(0xB64C, None, "HANGUL SYLLABLE DDWAEN", 0x31, "Hangul"),
    c(0xB64D, None, "HANGUL SYLLABLE DDWAENJ", 0x31, "Hangul"),
    c(0xB64E, None, "HANGUL SYLLABLE DDWAENH", 0x31, "Hangul"),
    c(0xB64F, None, "HANGUL SYLLABLE DDWAED", 0x31, "Hangul"),
    c(0xB650, None, "HANGUL SYLLABLE DDWAEL", 0x31, "Hangul"),
    c(0xB651, None, "HANGUL SYLLABLE DDWAELG", 0x31, "Hangul"),
    c(0xB652, None, "HANGUL SYLLABLE DDWAELM", 0x31, "Hangul"),
    c(0xB653, None, "HANGUL SYLLABLE DDWAELB", 0x31, "Hangul"),
    c(0xB654, None, "HANGUL SYLLABLE DDWAELS", 0x31, "Hangul"),
    c(0xB655, None, "HANGUL SYLLABLE DDWAELT", 0x31, "Hangul"),
    c(0xB656, None, "HANGUL SYLLABLE DDWAELP", 0x31, "Hangul"),
    c(0xB657, None, "HANGUL SYLLABLE DDWAELH", 0x31, "Hangul"),
    c(0xB658, None, "HANGUL SYLLABLE DDWAEM", 0x31, "Hangul"),
    c(0xB659, None, "HANGUL SYLLABLE DDWAEB", 0x31, "Hangul"),
    c(0xB65A, None, "HANGUL SYLLABLE DDWAEBS", 0x31, "Hangul"),
    c(0xB65B, None, "HANGUL SYLLABLE DDWAES", 0x31, "Hangul"),
    c(0xB65C, None, "HANGUL SYLLABLE DDWAESS", 0x31, "Hangul"),
    c(0xB65D, None, "HANGUL SYLLABLE DDWAENG", 0x31, "Hangul"),
    c(0xB65E, None, "HANGUL SYLLABLE DDWAEJ", 0x31, "Hangul"),
    c(0xB65F, None, "HANGUL SYLLABLE DDWAEC", 0x31, "Hangul"),
    c(0xB660, None, "HANGUL SYLLABLE DDWAEK", 0x31, "Hangul"),
    c(0xB661, None, "HANGUL SYLLABLE DDWAET", 0x31, "Hangul"),
    c(0xB662, None, "HANGUL SYLLABLE DDWAEP", 0x31, "Hangul"),
    c(0xB663, None, "HANGUL SYLLABLE DDWAEH", 0x31, "Hangul"),
    c(0xB664, None, "HANGUL SYLLABLE DDOE", 0x31, "Hangul"),
    c(0xB665, None, "HANGUL SYLLABLE DDOEG", 0x31, "Hangul"),
    c(0xB666, None, "HANGUL SYLLABLE DDOEGG", 0x31, "Hangul"),
    c(0xB667, None, "HANGUL SYLLABLE DDOEGS", 0x31, "Hangul"),
    c(0xB668, None, "HANGUL SYLLABLE DDOEN", 0x31, "Hangul"),
    c(0xB669, None, "HANGUL SYLLABLE DDOENJ", 0x31, "Hangul"),
    c(0xB66A, None, "HANGUL SYLLABLE DDOENH", 0x31, "Hangul"),
    c(0xB66B, None, "HANGUL SYLLABLE DDOED", 0x31, "Hangul"),
    c(0xB66C, None, "HANGUL SYLLABLE DDOEL", 0x31, "Hangul"),
    c(0xB66D, None, "HANGUL SYLLABLE DDOELG", 0x31, "Hangul"),
    c(0xB66E, None, "HANGUL SYLLABLE DDOELM", 0x31, "Hangul"),
    c(0xB66F, None, "HANGUL SYLLABLE DDOELB", 0x31, "Hangul"),
    c(0xB670, None, "HANGUL SYLLABLE DDOELS", 0x31, "Hangul"),
    c(0xB671, None, "HANGUL SYLLABLE DDOELT", 0x31, "Hangul"),
    c(0xB672, None, "HANGUL SYLLABLE DDOELP", 0x31, "Hangul"),
    c(0xB673, None, "HANGUL SYLLABLE DDOELH", 0x31, "Hangul"),
    c(0xB674, None, "HANGUL SYLLABLE DDOEM", 0x31, "Hangul"),
    c(0xB675, None, "HANGUL SYLLABLE DDOEB", 0x31, "Hangul"),
    c(0xB676, None, "HANGUL SYLLABLE DDOEBS", 0x31, "Hangul"),
    c(0xB677, None, "HANGUL SYLLABLE DDOES", 0x31, "Hangul"),
    c(0xB678, None, "HANGUL SYLLABLE DDOESS", 0x31, "Hangul"),
    c(0xB679, None, "HANGUL SYLLABLE DDOENG", 0x31, "Hangul"),
    c(0xB67A, None, "HANGUL SYLLABLE DDOEJ", 0x31, "Hangul"),
    c(0xB67B, None, "HANGUL SYLLABLE DDOEC", 0x31, "Hangul"),
    c(0xB67C, None, "HANGUL SYLLABLE DDOEK", 0x31, "Hangul"),
    c(0xB67D, None, "HANGUL SYLLABLE DDOET", 0x31, "Hangul"),
    c(0xB67E, None, "HANGUL SYLLABLE DDOEP", 0x31, "Hangul"),
    c(0xB67F, None, "HANGUL SYLLABLE DDOEH", 0x31, "Hangul"),
    c(0xB680, None, "HANGUL SYLLABLE DDYO", 0x31, "Hangul"),
    c(0xB681, None, "HANGUL SYLLABLE DDYOG", 0x31, "Hangul"),
    c(0xB682, None, "HANGUL SYLLABLE DDYOGG", 0x31, "Hangul"),
    c(0xB683, None, "HANGUL SYLLABLE DDYOGS", 0x31, "Hangul"),
    c(0xB684, None, "HANGUL SYLLABLE DDYON", 0x31, "Hangul"),
    c(0xB685, None, "HANGUL SYLLABLE DDYONJ", 0x31, "Hangul"),
    c(0xB686, None, "HANGUL SYLLABLE DDYONH", 0x31, "Hangul"),
    c(0xB687, None, "HANGUL SYLLABLE DDYOD", 0x31, "Hangul"),
    c(0xB688, None, "HANGUL SYLLABLE DDYOL", 0x31, "Hangul"),
    c(0xB689, None, "HANGUL SYLLABLE DDYOLG", 0x31, "Hangul"),
    c(0xB68A, None, "HANGUL SYLLABLE DDYOLM", 0x31, "Hangul"),
    c(0xB68B, None, "HANGUL SYLLABLE DDYOLB", 0x31, "Hangul"),
    c(0xB68C, None, "HANGUL SYLLABLE DDYOLS", 0x31, "Hangul"),
    c(0xB68D, None, "HANGUL SYLLABLE DDYOLT", 0x31, "Hangul"),
    c(0xB68E, None, "HANGUL SYLLABLE DDYOLP", 0x31, "Hangul"),
    c(0xB68F, None, "HANGUL SYLLABLE DDYOLH", 0x31, "Hangul"),
    c(0xB690, None, "HANGUL SYLLABLE DDYOM", 0x31, "Hangul"),
    c(0xB691, None, "HANGUL SYLLABLE DDYOB", 0x31, "Hangul"),
    c(0xB692, None, "HANGUL SYLLABLE DDYOBS", 0x31, "Hangul"),
    c(0xB693, None, "HANGUL SYLLABLE DDYOS", 0x31, "Hangul"),
    c(0xB694, None, "HANGUL SYLLABLE DDYOSS", 0x31, "Hangul"),
    c(0xB695, None, "HANGUL SYLLABLE DDYONG", 0x31, "Hangul"),
    c(0xB696, None, "HANGUL SYLLABLE DDYOJ", 0x31, "Hangul"),
    c(0xB697, None, "HANGUL SYLLABLE DDYOC", 0x31, "Hangul"),
    c(0xB698, None, "HANGUL SYLLABLE DDYOK", 0x31, "Hangul"),
    c(0xB699, None, "HANGUL SYLLABLE DDYOT", 0x31, "Hangul"),
    c(0xB69A, None, "HANGUL SYLLABLE DDYOP", 0x31, "Hangul"),
    c(0xB69B, None, "HANGUL SYLLABLE DDYOH", 0x31, "Hangul"),
    c(0xB69C, None, "HANGUL SYLLABLE DDU", 0x31, "Hangul"),
    c(0xB69D, None, "HANGUL SYLLABLE DDUG", 0x31, "Hangul"),
    c(0xB69E, None, "HANGUL SYLLABLE DDUGG", 0x31, "Hangul"),
    c(0xB69F, None, "HANGUL SYLLABLE DDUGS", 0x31, "Hangul"),
    c(0xB6A0, None, "HANGUL SYLLABLE DDUN", 0x31, "Hangul"),
    c(0xB6A1, None, "HANGUL SYLLABLE DDUNJ", 0x31, "Hangul"),
    c(0xB6A2, None, "HANGUL SYLLABLE DDUNH", 0x31, "Hangul"),
    c(0xB6A3, None, "HANGUL SYLLABLE DDUD", 0x31, "Hangul"),
    c(0xB6A4, None, "HANGUL SYLLABLE DDUL", 0x31, "Hangul"),
    c(0xB6A5, None, "HANGUL SYLLABLE DDULG", 0x31, "Hangul"),
    c(0xB6A6, None, "HANGUL SYLLABLE DDULM", 0x31, "Hangul"),
    c(0xB6A7, None, "HANGUL SYLLABLE DDULB", 0x31, "Hangul"),
    c(0xB6A8, None, "HANGUL SYLLABLE DDULS", 0x31, "Hangul"),
    c(0xB6A9, None, "HANGUL SYLLABLE DDULT", 0x31, "Hangul"),
    c(0xB6AA, None, "HANGUL SYLLABLE DDULP", 0x31, "Hangul"),
    c(0xB6AB, None, "HANGUL SYLLABLE DDULH", 0x31, "Hangul"),
    c(0xB6AC, None, "HANGUL SYLLABLE DDUM", 0x31, "Hangul"),
    c(0xB6AD, None, "HANGUL SYLLABLE DDUB", 0x31, "Hangul"),
    c(0xB6AE, None, "HANGUL SYLLABLE DDUBS", 0x31, "Hangul"),
    c(0xB6AF, None, "HANGUL SYLLABLE DDUS", 0x31, "Hangul"),
    c(0xB6B0, None, "HANGUL SYLLABLE DDUSS", 0x31, "Hangul"),
    c(0xB6B1, None, "HANGUL SYLLABLE DDUNG", 0x31, "Hangul"),
    c(0xB6B2, None, "HANGUL SYLLABLE DDUJ", 0x31, "Hangul"),
    c(0xB6B3, None, "HANGUL SYLLABLE DDUC", 0x31, "Hangul"),
    c(0xB6B4, None, "HANGUL SYLLABLE DDUK", 0x31, "Hangul"),
    c(0xB6B5, None, "HANGUL SYLLABLE DDUT", 0x31, "Hangul"),
    c(0xB6B6, None, "HANGUL SYLLABLE DDUP", 0x31, "Hangul"),
    c(0xB6B7, None, "HANGUL SYLLABLE DDUH", 0x31, "Hangul"),
    c(0xB6B8, None, "HANGUL SYLLABLE DDWEO", 0x31, "Hangul"),
    c(0xB6B9, None, "HANGUL SYLLABLE DDWEOG", 0x31, "Hangul"),
    c(0xB6BA, None, "HANGUL SYLLABLE DDWEOGG", 0x31, "Hangul"),
    c(0xB6BB, None, "HANGUL SYLLABLE DDWEOGS", 0x31, "Hangul"),
    c(0xB6BC, None, "HANGUL SYLLABLE DDWEON", 0x31, "Hangul"),
    c(0xB6BD, None, "HANGUL SYLLABLE DDWEONJ", 0x31, "Hangul"),
    c(0xB6BE, None, "HANGUL SYLLABLE DDWEONH", 0x31, "Hangul"),
    c(0xB6BF, None, "HANGUL SYLLABLE DDWEOD", 0x31, "Hangul"),
    c(0xB6C0, None, "HANGUL SYLLABLE DDWEOL", 0x31, "Hangul"),
    c(0xB6C1, None, "HANGUL SYLLABLE DDWEOLG", 0x31, "Hangul"),
    c(0xB6C2, None, "HANGUL SYLLABLE DDWEOLM", 0x31, "Hangul"),
    c(0xB6C3, None, "HANGUL SYLLABLE DDWEOLB", 0x31, "Hangul"),
    c(0xB6C4, None, "HANGUL SYLLABLE DDWEOLS", 0x31, "Hangul"),
    c(0xB6C5, None, "HANGUL SYLLABLE DDWEOLT", 0x31, "Hangul"),
    c(0xB6C6, None, "HANGUL SYLLABLE DDWEOLP", 0x31, "Hangul"),
    c(0xB6C7, None, "HANGUL SYLLABLE DDWEOLH", 0x31, "Hangul"),
    c(0xB6C8, None, "HANGUL SYLLABLE DDWEOM", 0x31, "Hangul"),
    c(0xB6C9, None, "HANGUL SYLLABLE DDWEOB", 0x31, "Hangul"),
    c(0xB6CA, None, "HANGUL SYLLABLE DDWEOBS", 0x31, "Hangul"),
    c(0xB6CB, None, "HANGUL SYLLABLE DDWEOS", 0x31, "Hangul"),
    c(0xB6CC, None, "HANGUL SYLLABLE DDWEOSS", 0x31, "Hangul"),
    c(0xB6CD, None, "HANGUL SYLLABLE DDWEONG", 0x31, "Hangul"),
    c(0xB6CE, None, "HANGUL SYLLABLE DDWEOJ", 0x31, "Hangul"),
    c(0xB6CF, None, "HANGUL SYLLABLE DDWEOC", 0x31, "Hangul"),
    c(0xB6D0, None, "HANGUL SYLLABLE DDWEOK", 0x31, "Hangul"),
    c(0xB6D1, None, "HANGUL SYLLABLE DDWEOT", 0x31, "Hangul"),
    c(0xB6D2, None, "HANGUL SYLLABLE DDWEOP", 0x31, "Hangul"),
    c(0xB6D3, None, "HANGUL SYLLABLE DDWEOH", 0x31, "Hangul"),
    c(0xB6D4, None, "HANGUL SYLLABLE DDWE", 0x31, "Hangul"),
    c(0xB6D5, None, "HANGUL SYLLABLE DDWEG", 0x31, "Hangul"),
    c(0xB6D6, None, "HANGUL SYLLABLE DDWEGG", 0x31, "Hangul"),
    c(0xB6D7, None, "HANGUL SYLLABLE DDWEGS", 0x31, "Hangul"),
    c(0xB6D8, None, "HANGUL SYLLABLE DDWEN", 0x31, "Hangul"),
    c(0xB6D9, None, "HANGUL SYLLABLE DDWENJ", 0x31, "Hangul"),
    c(0xB6DA, None, "HANGUL SYLLABLE DDWENH", 0x31, "Hangul"),
    c(0xB6DB, None, "HANGUL SYLLABLE DDWED", 0x31, "Hangul"),
    c(0xB6DC, None, "HANGUL SYLLABLE DDWEL", 0x31, "Hangul"),
    c(0xB6DD, None, "HANGUL SYLLABLE DDWELG", 0x31, "Hangul"),
    c(0xB6DE, None, "HANGUL SYLLABLE DDWELM", 0x31, "Hangul"),
    c(0xB6DF, None, "HANGUL SYLLABLE DDWELB", 0x31, "Hangul"),
    c(0xB6E0, None, "HANGUL SYLLABLE DDWELS", 0x31, "Hangul"),
    c(0xB6E1, None, "HANGUL SYLLABLE DDWELT", 0x31, "Hangul"),
    c(0xB6E2, None, "HANGUL SYLLABLE DDWELP", 0x31, "Hangul"),
    c(0xB6E3, None, "HANGUL SYLLABLE DDWELH", 0x31, "Hangul"),
    c(0xB6E4, None, "HANGUL SYLLABLE DDWEM", 0x31, "Hangul"),
    c(0xB6E5, None, "HANGUL SYLLABLE DDWEB", 0x31, "Hangul"),
    c(0xB6E6, None, "HANGUL SYLLABLE DDWEBS", 0x31, "Hangul"),
    c(0xB6E7, None, "HANGUL SYLLABLE DDWES", 0x31, "Hangul"),
    c(0xB6E8, None, "HANGUL SYLLABLE DDWESS", 0x31, "Hangul"),
    c(0xB6E9, None, "HANGUL SYLLABLE DDWENG", 0x31, "Hangul"),
    c(0xB6EA, None, "HANGUL SYLLABLE DDWEJ", 0x31, "Hangul"),
    c(0xB6EB, None, "HANGUL SYLLABLE DDWEC", 0x31, "Hangul"),
    c(0xB6EC, None, "HANGUL SYLLABLE DDWEK", 0x31, "Hangul"),
    c(0xB6ED, None, "HANGUL SYLLABLE DDWET", 0x31, "Hangul"),
    c(0xB6EE, None, "HANGUL SYLLABLE DDWEP", 0x31, "Hangul"),
    c(0xB6EF, None, "HANGUL SYLLABLE DDWEH", 0x31, "Hangul"),
    c(0xB6F0, None, "HANGUL SYLLABLE DDWI", 0x31, "Hangul"),
    c(0xB6F1, None, "HANGUL SYLLABLE DDWIG", 0x31, "Hangul"),
    c(0xB6F2, None, "HANGUL SYLLABLE DDWIGG", 0x31, "Hangul"),
    c(0xB6F3, None, "HANGUL SYLLABLE DDWIGS", 0x31, "Hangul"),
    c(0xB6F4, None, "HANGUL SYLLABLE DDWIN", 0x31, "Hangul"),
    c(0xB6F5, None, "HANGUL SYLLABLE DDWINJ", 0x31, "Hangul"),
    c(0xB6F6, None, "HANGUL SYLLABLE DDWINH", 0x31, "Hangul"),
    c(0xB6F7, None, "HANGUL SYLLABLE DDWID", 0x31, "Hangul"),
    c(0xB6F8, None, "HANGUL SYLLABLE DDWIL", 0x31, "Hangul"),
    c(0xB6F9, None, "HANGUL SYLLABLE DDWILG", 0x31, "Hangul"),
    c(0xB6FA, None, "HANGUL SYLLABLE DDWILM", 0x31, "Hangul"),
    c(0xB6FB, None, "HANGUL SYLLABLE DDWILB", 0x31, "Hangul"),
    c(0xB6FC, None, "HANGUL SYLLABLE DDWILS", 0x31, "Hangul"),
    c(0xB6FD, None, "HANGUL SYLLABLE DDWILT", 0x31, "Hangul"),
    c(0xB6FE, None, "HANGUL SYLLABLE DDWILP", 0x31, "Hangul"),
    c(0xB6FF, None, "HANGUL SYLLABLE DDWILH", 0x31, "Hangul"),
    c(0xB700, None, "HANGUL SYLLABLE DDWIM", 0x31, "Hangul"),
    c(0xB701, None, "HANGUL SYLLABLE DDWIB", 0x31, "Hangul"),
    c(0xB702, None, "HANGUL SYLLABLE DDWIBS", 0x31, "Hangul"),
    c(0xB703, None, "HANGUL SYLLABLE DDWIS", 0x31, "Hangul"),
    c(0xB704, None, "HANGUL SYLLABLE DDWISS", 0x31, "Hangul"),
    c(0xB705, None, "HANGUL SYLLABLE DDWING", 0x31, "Hangul"),
    c(0xB706, None, "HANGUL SYLLABLE DDWIJ", 0x31, "Hangul"),
    c(0xB707, None, "HANGUL SYLLABLE DDWIC", 0x31, "Hangul"),
    c(0xB708, None, "HANGUL SYLLABLE DDWIK", 0x31, "Hangul"),
    c(0xB709, None, "HANGUL SYLLABLE DDWIT", 0x31, "Hangul"),
    c(0xB70A, None, "HANGUL SYLLABLE DDWIP", 0x31, "Hangul"),
    c(0xB70B, None, "HANGUL SYLLABLE DDWIH", 0x31, "Hangul"),
    c(0xB70C, None, "HANGUL SYLLABLE DDYU", 0x31, "Hangul"),
    c(0xB70D, None, "HANGUL SYLLABLE DDYUG", 0x31, "Hangul"),
    c(0xB70E, None, "HANGUL SYLLABLE DDYUGG", 0x31, "Hangul"),
    c(0xB70F, None, "HANGUL SYLLABLE DDYUGS", 0x31, "Hangul"),
    c(0xB710, None, "HANGUL SYLLABLE DDYUN", 0x31, "Hangul"),
    c(0xB711, None, "HANGUL SYLLABLE DDYUNJ", 0x31, "Hangul"),
    c(0xB712, None, "HANGUL SYLLABLE DDYUNH", 0x31, "Hangul"),
    c(0xB713, None, "HANGUL SYLLABLE DDYUD", 0x31, "Hangul"),
    c(0xB714, None, "HANGUL SYLLABLE DDYUL", 0x31, "Hangul"),
    c(0xB715, None, "HANGUL SYLLABLE DDYULG", 0x31, "Hangul"),
    c(0xB716, None, "HANGUL SYLLABLE DDYULM", 0x31, "Hangul"),
    c(0xB717, None, "HANGUL SYLLABLE DDYULB", 0x31, "Hangul"),
    c(0xB718, None, "HANGUL SYLLABLE DDYULS", 0x31, "Hangul"),
    c(0xB719, None, "HANGUL SYLLABLE DDYULT", 0x31, "Hangul"),
    c(0xB71A, None, "HANGUL SYLLABLE DDYULP", 0x31, "Hangul"),
    c(0xB71B, None, "HANGUL SYLLABLE DDYULH", 0x31, "Hangul"),
    c(0xB71C, None, "HANGUL SYLLABLE DDYUM", 0x31, "Hangul"),
    c(0xB71D, None, "HANGUL SYLLABLE DDYUB", 0x31, "Hangul"),
    c(0xB71E, None, "HANGUL SYLLABLE DDYUBS", 0x31, "Hangul"),
    c(0xB71F, None, "HANGUL SYLLABLE DDYUS", 0x31, "Hangul"),
    c(0xB720, None, "HANGUL SYLLABLE DDYUSS", 0x31, "Hangul"),
    c(0xB721, None, "HANGUL SYLLABLE DDYUNG", 0x31, "Hangul"),
    c(0xB722, None, "HANGUL SYLLABLE DDYUJ", 0x31, "Hangul"),
    c(0xB723, None, "HANGUL SYLLABLE DDYUC", 0x31, "Hangul"),
    c(0xB724, None, "HANGUL SYLLABLE DDYUK", 0x31, "Hangul"),
    c(0xB725, None, "HANGUL SYLLABLE DDYUT", 0x31, "Hangul"),
    c(0xB726, None, "HANGUL SYLLABLE DDYUP", 0x31, "Hangul"),
    c(0xB727, None, "HANGUL SYLLABLE DDYUH", 0x31, "Hangul"),
    c(0xB728, None, "HANGUL SYLLABLE DDEU", 0x31, "Hangul"),
    c(0xB729, None, "HANGUL SYLLABLE DDEUG", 0x31, "Hangul"),
    c(0xB72A, None, "HANGUL SYLLABLE DDEUGG", 0x31, "Hangul"),
    c(0xB72B, None, "HANGUL SYLLABLE DDEUGS", 0x31, "Hangul"),
    c(0xB72C, None, "HANGUL SYLLABLE DDEUN", 0x31, "Hangul"),
    c(0xB72D, None, "HANGUL SYLLABLE DDEUNJ", 0x31, "Hangul"),
    c(0xB72E, None, "HANGUL SYLLABLE DDEUNH", 0x31, "Hangul"),
    c(0xB72F, None, "HANGUL SYLLABLE DDEUD", 0x31, "Hangul"),
    c(0xB730, None, "HANGUL SYLLABLE DDEUL", 0x31, "Hangul"),
    c(0xB731, None, "HANGUL SYLLABLE DDEULG", 0x31, "Hangul"),
    c(0xB732, None, "HANGUL SYLLABLE DDEULM", 0x31, "Hangul"),
    c(0xB733, None, "HANGUL SYLLABLE DDEULB", 0x31, "Hangul"),
    c(0xB734, None, "HANGUL SYLLABLE DDEULS", 0x31, "Hangul"),
    c(0xB735, None, "HANGUL SYLLABLE DDEULT", 0x31, "Hangul"),
    c(0xB736, None, "HANGUL SYLLABLE DDEULP", 0x31, "Hangul"),
    c(0xB737, None, "HANGUL SYLLABLE DDEULH", 0x31, "Hangul"),
    c(0xB738, None, "HANGUL SYLLABLE DDEUM", 0x31, "Hangul"),
    c(0xB739, None, "HANGUL SYLLABLE DDEUB", 0x31, "Hangul"),
    c(0xB73A, None, "HANGUL SYLLABLE DDEUBS", 0x31, "Hangul"),
    c(0xB73B, None, "HANGUL SYLLABLE DDEUS", 0x31, "Hangul"),
    c(0xB73C, None, "HANGUL SYLLABLE DDEUSS", 0x31, "Hangul"),
    c(0xB73D, None, "HANGUL SYLLABLE DDEUNG", 0x31, "Hangul"),
    c(0xB73E, None, "HANGUL SYLLABLE DDEUJ", 0x31, "Hangul"),
    c(0xB73F, None, "HANGUL SYLLABLE DDEUC", 0x31, "Hangul"),
    c(0xB740, None, "HANGUL SYLLABLE DDEUK", 0x31, "Hangul"),
    c(0xB741, None, "HANGUL SYLLABLE DDEUT", 0x31, "Hangul"),
    c(0xB742, None, "HANGUL SYLLABLE DDEUP", 0x31, "Hangul"),
    c(0xB743, None, "HANGUL SYLLABLE DDEUH", 0x31, "Hangul"),
    c(0xB744, None, "HANGUL SYLLABLE DDYI", 0x31, "Hangul"),
    c(0xB745, None, "HANGUL SYLLABLE DDYIG", 0x31, "Hangul"),
    c(0xB746, None, "HANGUL SYLLABLE DDYIGG", 0x31, "Hangul"),
    c(0xB747, None, "HANGUL SYLLABLE DDYIGS", 0x31, "Hangul"),
    c(0xB748, None, "HANGUL SYLLABLE DDYIN", 0x31, "Hangul"),
    c(0xB749, None, "HANGUL SYLLABLE DDYINJ", 0x31, "Hangul"),
    c(0xB74A, None, "HANGUL SYLLABLE DDYINH", 0x31, "Hangul"),
    c(0xB74B, None, "HANGUL SYLLABLE DDYID", 0x31, "Hangul"),
    c(0xB74C, None, "HANGUL SYLLABLE DDYIL", 0x31, "Hangul"),
    c(0xB74D, None, "HANGUL SYLLABLE DDYILG", 0x31, "Hangul"),
    c(0xB74E, None, "HANGUL SYLLABLE DDYILM", 0x31, "Hangul"),
    c(0xB74F, None, "HANGUL SYLLABLE DDYILB", 0x31, "Hangul"),
    c(0xB750, None, "HANGUL SYLLABLE DDYILS", 0x31, "Hangul"),
    c(0xB751, None, "HANGUL SYLLABLE DDYILT", 0x31, "Hangul"),
    c(0xB752, None, "HANGUL SYLLABLE DDYILP", 0x31, "Hangul"),
    c(0xB753, None, "HANGUL SYLLABLE DDYILH", 0x31, "Hangul"),
    c(0xB754, None, "HANGUL SYLLABLE DDYIM", 0x31, "Hangul"),
    c(0xB755, None, "HANGUL SYLLABLE DDYIB", 0x31, "Hangul"),
    c(0xB756, None, "HANGUL SYLLABLE DDYIBS", 0x31, "Hangul"),
    c(0xB757, None, "HANGUL SYLLABLE DDYIS", 0x31, "Hangul"),
    c(0xB758, None, "HANGUL SYLLABLE DDYISS", 0x31, "Hangul"),
    c(0xB759, None, "HANGUL SYLLABLE DDYING", 0x31, "Hangul"),
    c(0xB75A, None, "HANGUL SYLLABLE DDYIJ", 0x31, "Hangul"),
    c(0xB75B, None, "HANGUL SYLLABLE DDYIC", 0x31, "Hangul"),
    c(0xB75C, None, "HANGUL SYLLABLE DDYIK", 0x31, "Hangul"),
    c(0xB75D, None, "HANGUL SYLLABLE DDYIT", 0x31, "Hangul"),
    c(0xB75E, None, "HANGUL SYLLABLE DDYIP", 0x31, "Hangul"),
    c(0xB75F, None, "HANGUL SYLLABLE DDYIH", 0x31, "Hangul"),
    c(0xB760, None, "HANGUL SYLLABLE DDI", 0x31, "Hangul"),
    c(0xB761, None, "HANGUL SYLLABLE DDIG", 0x31, "Hangul"),
    c(0xB762, None, "HANGUL SYLLABLE DDIGG", 0x31, "Hangul"),
    c(0xB763, None, "HANGUL SYLLABLE DDIGS", 0x31, "Hangul"),
    c(0xB764, None, "HANGUL SYLLABLE DDIN", 0x31, "Hangul"),
    c(0xB765, None, "HANGUL SYLLABLE DDINJ", 0x31, "Hangul"),
    c(0xB766, None, "HANGUL SYLLABLE DDINH", 0x31, "Hangul"),
    c(0xB767, None, "HANGUL SYLLABLE DDID", 0x31, "Hangul"),
    c(0xB768, None, "HANGUL SYLLABLE DDIL", 0x31, "Hangul"),
    c(0xB769, None, "HANGUL SYLLABLE DDILG", 0x31, "Hangul"),
    c(0xB76A, None, "HANGUL SYLLABLE DDILM", 0x31, "Hangul"),
    c(0xB76B, None, "HANGUL SYLLABLE DDILB", 0x31, "Hangul"),
    c(0xB76C, None, "HANGUL SYLLABLE DDILS", 0x31, "Hangul"),
    c(0xB76D, None, "HANGUL SYLLABLE DDILT", 0x31, "Hangul"),
    c(0xB76E, None, "HANGUL SYLLABLE DDILP", 0x31, "Hangul"),
    c(0xB76F, None, "HANGUL SYLLABLE DDILH", 0x31, "Hangul"),
    c(0xB770, None, "HANGUL SYLLABLE DDIM", 0x31, "Hangul"),
    c(0xB771, None, "HANGUL SYLLABLE DDIB", 0x31, "Hangul"),
    c(0xB772, None, "HANGUL SYLLABLE DDIBS", 0x31, "Hangul"),
    c(0xB773, None, "HANGUL SYLLABLE DDIS", 0x31, "Hangul"),
    c(0xB774, None, "HANGUL SYLLABLE DDISS", 0x31, "Hangul"),
    c(0xB775, None, "HANGUL SYLLABLE DDING", 0x31, "Hangul"),
    c(0xB776, None, "HANGUL SYLLABLE DDIJ", 0x31, "Hangul"),
    c(0xB777, None, "HANGUL SYLLABLE DDIC", 0x31, "Hangul"),
    c(0xB778, None, "HANGUL SYLLABLE DDIK", 0x31, "Hangul"),
    c(0xB779, None, "HANGUL SYLLABLE DDIT", 0x31, "Hangul"),
    c(0xB77A, None, "HANGUL SYLLABLE DDIP", 0x31, "Hangul"),
    c(0xB77B, None, "HANGUL SYLLABLE DDIH", 0x31, "Hangul"),
    c(0xB77C, None, "HANGUL SYLLABLE RA", 0x31, "Hangul"),
    c(0xB77D, None, "HANGUL SYLLABLE RAG", 0x31, "Hangul"),
    c(0xB77E, None, "HANGUL SYLLABLE RAGG", 0x31, "Hangul"),
    c(0xB77F, None, "HANGUL SYLLABLE RAGS", 0x31, "Hangul"),
    c(0xB780, None, "HANGUL SYLLABLE RAN", 0x31, "Hangul"),
    c(0xB781, None, "HANGUL SYLLABLE RANJ", 0x31, "Hangul"),
    c(0xB782, None, "HANGUL SYLLABLE RANH", 0x31, "Hangul"),
    c(0xB783, None, "HANGUL SYLLABLE RAD", 0x31, "Hangul"),
    c(0xB784, None, "HANGUL SYLLABLE RAL", 0x31, "Hangul"),
    c(0xB785, None, "HANGUL SYLLABLE RALG", 0x31, "Hangul"),
    c(0xB786, None, "HANGUL SYLLABLE RALM", 0x31, "Hangul"),
    c(0xB787, None, "HANGUL SYLLABLE RALB", 0x31, "Hangul"),
    c(0xB788, None, "HANGUL SYLLABLE RALS", 0x31, "Hangul"),
    c(0xB789, None, "HANGUL SYLLABLE RALT", 0x31, "Hangul"),
    c(0xB78A, None, "HANGUL SYLLABLE RALP", 0x31, "Hangul"),
    c(0xB78B, None, "HANGUL SYLLABLE RALH", 0x31, "Hangul"),
    c(0xB78C, None, "HANGUL SYLLABLE RAM", 0x31, "Hangul"),
    c(0xB78D, None, "HANGUL SYLLABLE RAB", 0x31, "Hangul"),
    c(0xB78E, None, "HANGUL SYLLABLE RABS", 0x31, "Hangul"),
    c(0xB78F, None, "HANGUL SYLLABLE RAS", 0x31, "Hangul"),
    c(0xB790, None, "HANGUL SYLLABLE RASS", 0x31, "Hangul"),
    c(0xB791, None, "HANGUL SYLLABLE RANG", 0x31, "Hangul"),
    c(0xB792, None, "HANGUL SYLLABLE RAJ", 0x31, "Hangul"),
    c(0xB793, None, "HANGUL SYLLABLE RAC", 0x31, "Hangul"),
    c(0xB794, None, "HANGUL SYLLABLE RAK", 0x31, "Hangul"),
    c(0xB795, None, "HANGUL SYLLABLE RAT", 0x31, "Hangul"),
    c(0xB796, None, "HANGUL SYLLABLE RAP", 0x31, "Hangul"),
    c(0xB797, None, "HANGUL SYLLABLE RAH", 0x31, "Hangul"),
    c(0xB798, None, "HANGUL SYLLABLE RAE", 0x31, "Hangul"),
    c(0xB799, None, "HANGUL SYLLABLE RAEG", 0x31, "Hangul"),
    c(0xB79A, None, "HANGUL SYLLABLE RAEGG", 0x31, "Hangul"),
    c(0xB79B, None, "HANGUL SYLLABLE RAEGS", 0x31, "Hangul"),
    c(0xB79C, None, "HANGUL SYLLABLE RAEN", 0x31, "Hangul"),
    c(0xB79D, None, "HANGUL SYLLABLE RAENJ", 0x31, "Hangul"),
    c(0xB79E, None, "HANGUL SYLLABLE RAENH", 0x31, "Hangul"),
    c(0xB79F, None, "HANGUL SYLLABLE RAED", 0x31, "Hangul"),
    c(0xB7A0, None, "HANGUL SYLLABLE RAEL", 0x31, "Hangul"),
    c(0xB7A1, None, "HANGUL SYLLABLE RAELG", 0x31, "Hangul"),
    c(0xB7A2, None, "HANGUL SYLLABLE RAELM", 0x31, "Hangul"),
    c(0xB7A3, None, "HANGUL SYLLABLE RAELB", 0x31, "Hangul"),
    c(0xB7A4, None, "HANGUL SYLLABLE RAELS", 0x31, "Hangul"),
    c(0xB7A5, None, "HANGUL SYLLABLE RAELT", 0x31, "Hangul"),
    c(0xB7A6, None, "HANGUL SYLLABLE RAELP", 0x31, "Hangul"),
    c(0xB7A7, None, "HANGUL SYLLABLE RAELH", 0x31, "Hangul"),
    c(0xB7A8, None, "HANGUL SYLLABLE RAEM", 0x31, "Hangul"),
    c(0xB7A9, None, "HANGUL SYLLABLE RAEB", 0x31, "Hangul"),
    c(0xB7AA, None, "HANGUL SYLLABLE RAEBS", 0x31, "Hangul"),
    c(0xB7AB, None, "HANGUL SYLLABLE RAES", 0x31, "Hangul"),
    c(0xB7AC, None, "HANGUL SYLLABLE RAESS", 0x31, "Hangul"),
    c(0xB7AD, None, "HANGUL SYLLABLE RAENG", 0x31, "Hangul"),
    c(0xB7AE, None, "HANGUL SYLLABLE RAEJ", 0x31, "Hangul"),
    c(0xB7AF, None, "HANGUL SYLLABLE RAEC", 0x31, "Hangul"),
    c(0xB7B0, None, "HANGUL SYLLABLE RAEK", 0x31, "Hangul"),
    c(0xB7B1, None, "HANGUL SYLLABLE RAET", 0x31, "Hangul"),
    c(0xB7B2, None, "HANGUL SYLLABLE RAEP", 0x31, "Hangul"),
    c(0xB7B3, None, "HANGUL SYLLABLE RAEH", 0x31, "Hangul"),
    c(0xB7B4, None, "HANGUL SYLLABLE RYA", 0x31, "Hangul"),
    c(0xB7B5, None, "HANGUL SYLLABLE RYAG", 0x31, "Hangul"),
    c(0xB7B6, None, "HANGUL SYLLABLE RYAGG", 0x31, "Hangul"),
    c(0xB7B7, None, "HANGUL SYLLABLE RYAGS", 0x31, "Hangul"),
    c(0xB7B8, None, "HANGUL SYLLABLE RYAN", 0x31, "Hangul"),
    c(0xB7B9, None, "HANGUL SYLLABLE RYANJ", 0x31, "Hangul"),
    c(0xB7BA, None, "HANGUL SYLLABLE RYANH", 0x31, "Hangul"),
    c(0xB7BB, None, "HANGUL SYLLABLE RYAD", 0x31, "Hangul"),
    c(0xB7BC, None, "HANGUL SYLLABLE RYAL", 0x31, "Hangul"),
    c(0xB7BD, None, "HANGUL SYLLABLE RYALG", 0x31, "Hangul"),
    c(0xB7BE, None, "HANGUL SYLLABLE RYALM", 0x31, "Hangul"),
    c(0xB7BF, None, "HANGUL SYLLABLE RYALB", 0x31, "Hangul"),
    c(0xB7C0, None, "HANGUL SYLLABLE RYALS", 0x31, "Hangul"),
    c(0xB7C1, None, "HANGUL SYLLABLE RYALT", 0x31, "Hangul"),
    c(0xB7C2, None, "HANGUL SYLLABLE RYALP", 0x31, "Hangul"),
    c(0xB7C3, None, "HANGUL SYLLABLE RYALH", 0x31, "Hangul"),
    c(0xB7C4, None, "HANGUL SYLLABLE RYAM", 0x31, "Hangul"),
    c(0xB7C5, None, "HANGUL SYLLABLE RYAB", 0x31, "Hangul"),
    c(0xB7C6, None, "HANGUL SYLLABLE RYABS", 0x31, "Hangul"),
    c(0xB7C7, None, "HANGUL SYLLABLE RYAS", 0x31, "Hangul"),
    c(0xB7C8, None, "HANGUL SYLLABLE RYASS", 0x31, "Hangul"),
    c(0xB7C9, None, "HANGUL SYLLABLE RYANG", 0x31, "Hangul"),
    c(0xB7CA, None, "HANGUL SYLLABLE RYAJ", 0x31, "Hangul"),
    c(0xB7CB, None, "HANGUL SYLLABLE RYAC", 0x31, "Hangul"),
    c(0xB7CC, None, "HANGUL SYLLABLE RYAK", 0x31, "Hangul"),
    c(0xB7CD, None, "HANGUL SYLLABLE RYAT", 0x31, "Hangul"),
    c(0xB7CE, None, "HANGUL SYLLABLE RYAP", 0x31, "Hangul"),
    c(0xB7CF, None, "HANGUL SYLLABLE RYAH", 0x31, "Hangul"),
    c(0xB7D0, None, "HANGUL SYLLABLE RYAE", 0x31, "Hangul"),
    c(0xB7D1, None, "HANGUL SYLLABLE RYAEG", 0x31, "Hangul"),
    c(0xB7D2, None, "HANGUL SYLLABLE RYAEGG", 0x31, "Hangul"),
    c(0xB7D3, None, "HANGUL SYLLABLE RYAEGS", 0x31, "Hangul"),
    c(0xB7D4, None, "HANGUL SYLLABLE RYAEN", 0x31, "Hangul"),
    c(0xB7D5, None, "HANGUL SYLLABLE RYAENJ", 0x31, "Hangul"),
    c(0xB7D6, None, "HANGUL SYLLABLE RYAENH", 0x31, "Hangul"),
    c(0xB7D7, None, "HANGUL SYLLABLE RYAED", 0x31, "Hangul"),
    c(0xB7D8, None, "HANGUL SYLLABLE RYAEL", 0x31, "Hangul"),
    c(0xB7D9, None, "HANGUL SYLLABLE RYAELG", 0x31, "Hangul"),
    c(0xB7DA, None, "HANGUL SYLLABLE RYAELM", 0x31, "Hangul"),
    c(0xB7DB, None, "HANGUL SYLLABLE RYAELB", 0x31, "Hangul"),
    c(0xB7DC, None, "HANGUL SYLLABLE RYAELS", 0x31, "Hangul"),
    c(0xB7DD, None, "HANGUL SYLLABLE RYAELT", 0x31, "Hangul"),
    c(0xB7DE, None, "HANGUL SYLLABLE RYAELP", 0x31, "Hangul"),
    c(0xB7DF, None, "HANGUL SYLLABLE RYAELH", 0x31, "Hangul"),
    c(0xB7E0, None, "HANGUL SYLLABLE RYAEM", 0x31, "Hangul"),
    c(0xB7E1, None, "HANGUL SYLLABLE RYAEB", 0x31, "Hangul"),
    c(0xB7E2, None, "HANGUL SYLLABLE RYAEBS", 0x31, "Hangul"),
    c(0xB7E3, None, "HANGUL SYLLABLE RYAES", 0x31, "Hangul"),
    c(0xB7E4, None, "HANGUL SYLLABLE RYAESS", 0x31, "Hangul"),
    c(0xB7E5, None, "HANGUL SYLLABLE RYAENG", 0x31, "Hangul"),
    c(0xB7E6, None, "HANGUL SYLLABLE RYAEJ", 0x31, "Hangul"),
    c(0xB7E7, None, "HANGUL SYLLABLE RYAEC", 0x31, "Hangul"),
    c(0xB7E8, None, "HANGUL SYLLABLE RYAEK", 0x31, "Hangul"),
    c(0xB7E9, None, "HANGUL SYLLABLE RYAET", 0x31, "Hangul"),
    c(0xB7EA, None, "HANGUL SYLLABLE RYAEP", 0x31, "Hangul"),
    c(0xB7EB, None, "HANGUL SYLLABLE RYAEH", 0x31, "Hangul"),
    c(0xB7EC, None, "HANGUL SYLLABLE REO", 0x31, "Hangul"),
    c(0xB7ED, None, "HANGUL SYLLABLE REOG", 0x31, "Hangul"),
    c(0xB7EE, None, "HANGUL SYLLABLE REOGG", 0x31, "Hangul"),
    c(0xB7EF, None, "HANGUL SYLLABLE REOGS", 0x31, "Hangul"),
    c(0xB7F0, None, "HANGUL SYLLABLE REON", 0x31, "Hangul"),
    c(0xB7F1, None, "HANGUL SYLLABLE REONJ", 0x31, "Hangul"),
    c(0xB7F2, None, "HANGUL SYLLABLE REONH", 0x31, "Hangul"),
    c(0xB7F3, None, "HANGUL SYLLABLE REOD", 0x31, "Hangul"),
    c(0xB7F4, None, "HANGUL SYLLABLE REOL", 0x31, "Hangul"),
    c(0xB7F5, None, "HANGUL SYLLABLE REOLG", 0x31, "Hangul"),
    c(0xB7F6, None, "HANGUL SYLLABLE REOLM", 0x31, "Hangul"),
    c(0xB7F7, None, "HANGUL SYLLABLE REOLB", 0x31, "Hangul"),
    c(0xB7F8, None, "HANGUL SYLLABLE REOLS", 0x31, "Hangul"),
    c(0xB7F9, None, "HANGUL SYLLABLE REOLT", 0x31, "Hangul"),
    c(0xB7FA, None, "HANGUL SYLLABLE REOLP", 0x31, "Hangul"),
    c(0xB7FB, None, "HANGUL SYLLABLE REOLH", 0x31, "Hangul"),
    c(0xB7FC, None, "HANGUL SYLLABLE REOM", 0x31, "Hangul"),
    c(0xB7FD, None, "HANGUL SYLLABLE REOB", 0x31, "Hangul"),
    c(0xB7FE, None, "HANGUL SYLLABLE REOBS", 0x31, "Hangul"),
    c(0xB7FF, None, "HANGUL SYLLABLE REOS", 0x31, "Hangul"),
    c(0xB800, None, "HANGUL SYLLABLE REOSS", 0x31, "Hangul"),
    c(0xB801, None, "HANGUL SYLLABLE REONG", 0x31, "Hangul"),
    c(0xB802, None, "HANGUL SYLLABLE REOJ", 0x31, "Hangul"),
    c(0xB803, None, "HANGUL SYLLABLE REOC", 0x31, "Hangul"),
    c(0xB804, None, "HANGUL SYLLABLE REOK", 0x31, "Hangul"),
    c(0xB805, None, "HANGUL SYLLABLE REOT", 0x31, "Hangul"),
    c(0xB806, None, "HANGUL SYLLABLE REOP", 0x31, "Hangul"),
    c(0xB807, None, "HANGUL SYLLABLE REOH", 0x31, "Hangul"),
    c(0xB808, None, "HANGUL SYLLABLE RE", 0x31, "Hangul"),
    c(0xB809, None, "HANGUL SYLLABLE REG", 0x31, "Hangul"),
    c(0xB80A, None, "HANGUL SYLLABLE REGG", 0x31, "Hangul"),
    c(0xB80B, None, "HANGUL SYLLABLE REGS", 0x31, "Hangul"),
    c(0xB80C, None, "HANGUL SYLLABLE REN", 0x31, "Hangul"),
    c(0xB80D, None, "HANGUL SYLLABLE RENJ", 0x31, "Hangul"),
    c(0xB80E, None, "HANGUL SYLLABLE RENH", 0x31, "Hangul"),
    c(0xB80F, None, "HANGUL SYLLABLE RED", 0x31, "Hangul"),
    c(0xB810, None, "HANGUL SYLLABLE REL", 0x31, "Hangul"),
    c(0xB811, None, "HANGUL SYLLABLE RELG", 0x31, "Hangul"),
    c(0xB812, None, "HANGUL SYLLABLE RELM", 0x31, "Hangul"),
    c(0xB813, None, "HANGUL SYLLABLE RELB", 0x31, "Hangul"),
    c(0xB814, None, "HANGUL SYLLABLE RELS", 0x31, "Hangul"),
    c(0xB815, None, "HANGUL SYLLABLE RELT", 0x31, "Hangul"),
    c(0xB816, None, "HANGUL SYLLABLE RELP", 0x31, "Hangul"),
    c(0xB817, None, "HANGUL SYLLABLE RELH", 0x31, "Hangul"),
    c(0xB818, None, "HANGUL SYLLABLE REM", 0x31, "Hangul"),
    c(0xB819, None, "HANGUL SYLLABLE REB", 0x31, "Hangul"),
    c(0xB81A, None, "HANGUL SYLLABLE REBS", 0x31, "Hangul"),
    c(0xB81B, None, "HANGUL SYLLABLE RES", 0x31, "Hangul"),
    c(0xB81C, None, "HANGUL SYLLABLE RESS", 0x31, "Hangul"),
    c(0xB81D, None, "HANGUL SYLLABLE RENG", 0x31, "Hangul"),
    c(0xB81E, None, "HANGUL SYLLABLE REJ", 0x31, "Hangul"),
    c(0xB81F, None, "HANGUL SYLLABLE REC", 0x31, "Hangul"),
    c(0xB820, None, "HANGUL SYLLABLE REK", 0x31, "Hangul"),
    c(0xB821, None, "HANGUL SYLLABLE RET", 0x31, "Hangul"),
    c(0xB822, None, "HANGUL SYLLABLE REP", 0x31, "Hangul"),
    c(0xB823, None, "HANGUL SYLLABLE REH", 0x31, "Hangul"),
    c(0xB824, None, "HANGUL SYLLABLE RYEO", 0x31, "Hangul"),
    c(0xB825, None, "HANGUL SYLLABLE RYEOG", 0x31, "Hangul"),
    c(0xB826, None, "HANGUL SYLLABLE RYEOGG", 0x31, "Hangul"),
    c(0xB827, None, "HANGUL SYLLABLE RYEOGS", 0x31, "Hangul"),
    c(0xB828, None, "HANGUL SYLLABLE RYEON", 0x31, "Hangul"),
    c(0xB829, None, "HANGUL SYLLABLE RYEONJ", 0x31, "Hangul"),
    c(0xB82A, None, "HANGUL SYLLABLE RYEONH", 0x31, "Hangul"),
    c(0xB82B, None, "HANGUL SYLLABLE RYEOD", 0x31, "Hangul"),
    c(0xB82C, None, "HANGUL SYLLABLE RYEOL", 0x31, "Hangul"),
    c(0xB82D, None, "HANGUL SYLLABLE RYEOLG", 0x31, "Hangul"),
    c(0xB82E, None, "HANGUL SYLLABLE RYEOLM", 0x31, "Hangul"),
    c(0xB82F, None, "HANGUL SYLLABLE RYEOLB", 0x31, "Hangul"),
    c(0xB830, None, "HANGUL SYLLABLE RYEOLS", 0x31, "Hangul"),
    c(0xB831, None, "HANGUL SYLLABLE RYEOLT", 0x31, "Hangul"),
    c(0xB832, None, "HANGUL SYLLABLE RYEOLP", 0x31, "Hangul"),
    c(0xB833, None, "HANGUL SYLLABLE RYEOLH", 0x31, "Hangul"),
    c(0xB834, None, "HANGUL SYLLABLE RYEOM", 0x31, "Hangul"),
    c(0xB835, None, "HANGUL SYLLABLE RYEOB", 0x31, "Hangul"),
    c(0xB836, None, "HANGUL SYLLABLE RYEOBS", 0x31, "Hangul"),
    c(0xB837, None, "HANGUL SYLLABLE RYEOS", 0x31, "Hangul"),
    c(0xB838, None, "HANGUL SYLLABLE RYEOSS", 0x31, "Hangul"),
    c(0xB839, None, "HANGUL SYLLABLE RYEONG", 0x31, "Hangul"),
    c(0xB83A, None, "HANGUL SYLLABLE RYEOJ", 0x31, "Hangul"),
    c(0xB83B, None, "HANGUL SYLLABLE RYEOC", 0x31, "Hangul"),
    c(0xB83C, None, "HANGUL SYLLABLE RYEOK", 0x31, "Hangul"),
    c(0xB83D, None, "HANGUL SYLLABLE RYEOT", 0x31, "Hangul"),
    c(0xB83E, None, "HANGUL SYLLABLE RYEOP", 0x31, "Hangul"),
    c(0xB83F, None, "HANGUL SYLLABLE RYEOH", 0x31, "Hangul"),
    c(0xB840, None, "HANGUL SYLLABLE RYE", 0x31, "Hangul"),
    c(0xB841, None, "HANGUL SYLLABLE RYEG", 0x31, "Hangul"),
    c(0xB842, None, "HANGUL SYLLABLE RYEGG", 0x31, "Hangul"),
    c(0xB843, None, "HANGUL SYLLABLE RYEGS", 0x31, "Hangul"),
    c(0xB844, None, "HANGUL SYLLABLE RYEN", 0x31, "Hangul"),
    c(0xB845, None, "HANGUL SYLLABLE RYENJ", 0x31, "Hangul"),
    c(0xB846, None, "HANGUL SYLLABLE RYENH", 0x31, "Hangul"),
    c(0xB847, None, "HANGUL SYLLABLE RYED", 0x31, "Hangul"),
    c(0xB848, None, "HANGUL SYLLABLE RYEL", 0x31, "Hangul"),
    c(0xB849, None, "HANGUL SYLLABLE RYELG", 0x31, "Hangul"),
    c(0xB84A, None, "HANGUL SYLLABLE RYELM", 0x31, "Hangul"),
    c(0xB84B, None, "HANGUL SYLLABLE RYELB", 0x31, "Hangul"),
    c(0xB84C, None, "HANGUL SYLLABLE RYELS", 0x31, "Hangul"),
    c(0xB84D, None, "HANGUL SYLLABLE RYELT", 0x31, "Hangul"),
    c(0xB84E, None, "HANGUL SYLLABLE RYELP", 0x31, "Hangul"),
    c(0xB84F, None, "HANGUL SYLLABLE RYELH", 0x31, "Hangul"),
    c(0xB850, None, "HANGUL SYLLABLE RYEM", 0x31, "Hangul"),
    c(0xB851, None, "HANGUL SYLLABLE RYEB", 0x31, "Hangul"),
    c(0xB852, None, "HANGUL SYLLABLE RYEBS", 0x31, "Hangul"),
    c(0xB853, None, "HANGUL SYLLABLE RYES", 0x31, "Hangul"),
    c(0xB854, None, "HANGUL SYLLABLE RYESS", 0x31, "Hangul"),
    c(0xB855, None, "HANGUL SYLLABLE RYENG", 0x31, "Hangul"),
    c(0xB856, None, "HANGUL SYLLABLE RYEJ", 0x31, "Hangul"),
    c(0xB857, None, "HANGUL SYLLABLE RYEC", 0x31, "Hangul"),
    c(0xB858, None, "HANGUL SYLLABLE RYEK", 0x31, "Hangul"),
    c(0xB859, None, "HANGUL SYLLABLE RYET", 0x31, "Hangul"),
    c(0xB85A, None, "HANGUL SYLLABLE RYEP", 0x31, "Hangul"),
    c(0xB85B, None, "HANGUL SYLLABLE RYEH", 0x31, "Hangul"),
    c(0xB85C, None, "HANGUL SYLLABLE RO", 0x31, "Hangul"),
    c(0xB85D, None, "HANGUL SYLLABLE ROG", 0x31, "Hangul"),
    c(0xB85E, None, "HANGUL SYLLABLE ROGG", 0x31, "Hangul"),
    c(0xB85F, None, "HANGUL SYLLABLE ROGS", 0x31, "Hangul"),
    c(0xB860, None, "HANGUL SYLLABLE RON", 0x31, "Hangul"),
    c(0xB861, None, "HANGUL SYLLABLE RONJ", 0x31, "Hangul"),
    c(0xB862, None, "HANGUL SYLLABLE RONH", 0x31, "Hangul"),
    c(0xB863, None, "HANGUL SYLLABLE ROD", 0x31, "Hangul"),
    c(0xB864, None, "HANGUL SYLLABLE ROL", 0x31, "Hangul"),
    c(0xB865, None, "HANGUL SYLLABLE ROLG", 0x31, "Hangul"),
    c(0xB866, None, "HANGUL SYLLABLE ROLM", 0x31, "Hangul"),
    c(0xB867, None, "HANGUL SYLLABLE ROLB", 0x31, "Hangul"),
    c(0xB868, None, "HANGUL SYLLABLE ROLS", 0x31, "Hangul"),
    c(0xB869, None, "HANGUL SYLLABLE ROLT", 0x31, "Hangul"),
    c(0xB86A, None, "HANGUL SYLLABLE ROLP", 0x31, "Hangul"),
    c(0xB86B, None, "HANGUL SYLLABLE ROLH", 0x31, "Hangul"),
    c(0xB86C, None, "HANGUL SYLLABLE ROM", 0x31, "Hangul"),
    c(0xB86D, None, "HANGUL SYLLABLE ROB", 0x31, "Hangul"),
    c(0xB86E, None, "HANGUL SYLLABLE ROBS", 0x31, "Hangul"),
    c(0xB86F, None, "HANGUL SYLLABLE ROS", 0x31, "Hangul"),
    c(0xB870, None, "HANGUL SYLLABLE ROSS", 0x31, "Hangul"),
    c(0xB871, None, "HANGUL SYLLABLE RONG", 0x31, "Hangul"),
    c(0xB872, None, "HANGUL SYLLABLE ROJ", 0x31, "Hangul"),
    c(0xB873, None, "HANGUL SYLLABLE ROC", 0x31, "Hangul"),
    c(0xB874, None, "HANGUL SYLLABLE ROK", 0x31, "Hangul"),
    c(0xB875, None, "HANGUL SYLLABLE ROT", 0x31, "Hangul"),
    c(0xB876, None, "HANGUL SYLLABLE ROP", 0x31, "Hangul"),
    c(0xB877, None, "HANGUL SYLLABLE ROH", 0x31, "Hangul"),
    c(0xB878, None, "HANGUL SYLLABLE RWA", 0x31, "Hangul"),
    c(0xB879, None, "HANGUL SYLLABLE RWAG", 0x31, "Hangul"),
    c(0xB87A, None, "HANGUL SYLLABLE RWAGG", 0x31, "Hangul"),
    c(0xB87B, None, "HANGUL SYLLABLE RWAGS", 0x31, "Hangul"),
    c(0xB87C, None, "HANGUL SYLLABLE RWAN", 0x31, "Hangul"),
    c(0xB87D, None, "HANGUL SYLLABLE RWANJ", 0x31, "Hangul"),
    c(0xB87E, None, "HANGUL SYLLABLE RWANH", 0x31, "Hangul"),
    c(0xB87F, None, "HANGUL SYLLABLE RWAD", 0x31, "Hangul"),
    c(0xB880, None, "HANGUL SYLLABLE RWAL", 0x31, "Hangul"),
    c(0xB881, None, "HANGUL SYLLABLE RWALG", 0x31, "Hangul"),
    c(0xB882, None, "HANGUL SYLLABLE RWALM", 0x31, "Hangul"),
    c(0xB883, None, "HANGUL SYLLABLE RWALB", 0x31, "Hangul"),
    c(0xB884, None, "HANGUL SYLLABLE RWALS", 0x31, "Hangul"),
    c(0xB885, None, "HANGUL SYLLABLE RWALT", 0x31, "Hangul"),
    c(0xB886, None, "HANGUL SYLLABLE RWALP", 0x31, "Hangul"),
    c(0xB887, None, "HANGUL SYLLABLE RWALH", 0x31, "Hangul"),
    c(0xB888, None, "HANGUL SYLLABLE RWAM", 0x31, "Hangul"),
    c(0xB889, None, "HANGUL SYLLABLE RWAB", 0x31, "Hangul"),
    c(0xB88A, None, "HANGUL SYLLABLE RWABS", 0x31, "Hangul"),
    c(0xB88B, None, "HANGUL SYLLABLE RWAS", 0x31, "Hangul"),
    c(0xB88C, None, "HANGUL SYLLABLE RWASS", 0x31, "Hangul"),
    c(0xB88D, None, "HANGUL SYLLABLE RWANG", 0x31, "Hangul"),
    c(0xB88E, None, "HANGUL SYLLABLE RWAJ", 0x31, "Hangul"),
    c(0xB88F, None, "HANGUL SYLLABLE RWAC", 0x31, "Hangul"),
    c(0xB890, None, "HANGUL SYLLABLE RWAK", 0x31, "Hangul"),
    c(0xB891, None, "HANGUL SYLLABLE RWAT", 0x31, "Hangul"),
    c(0xB892, None, "HANGUL SYLLABLE RWAP", 0x31, "Hangul"),
    c(0xB893, None, "HANGUL SYLLABLE RWAH", 0x31, "Hangul"),
    c(0xB894, None, "HANGUL SYLLABLE RWAE", 0x31, "Hangul"),
    c(0xB895, None, "HANGUL SYLLABLE RWAEG", 0x31, "Hangul"),
    c(0xB896, None, "HANGUL SYLLABLE RWAEGG", 0x31, "Hangul"),
    c(0xB897, None, "HANGUL SYLLABLE RWAEGS", 0x31, "Hangul"),
    c(0xB898, None, "HANGUL SYLLABLE RWAEN", 0x31, "Hangul"),
    c(0xB899, None, "HANGUL SYLLABLE RWAENJ", 0x31, "Hangul"),
    c(0xB89A, None, "HANGUL SYLLABLE RWAENH", 0x31, "Hangul"),
    c(0xB89B, None, "HANGUL SYLLABLE RWAED", 0x31, "Hangul"),
    c(0xB89C, None, "HANGUL SYLLABLE RWAEL", 0x31, "Hangul"),
    c(0xB89D, None, "HANGUL SYLLABLE RWAELG", 0x31, "Hangul"),
    c(0xB89E, None, "HANGUL SYLLABLE RWAELM", 0x31, "Hangul"),
    c(0xB89F, None, "HANGUL SYLLABLE RWAELB", 0x31, "Hangul"),
    c(0xB8A0, None, "HANGUL SYLLABLE RWAELS", 0x31, "Hangul"),
    c(0xB8A1, None, "HANGUL SYLLABLE RWAELT", 0x31, "Hangul"),
    c(0xB8A2, None, "HANGUL SYLLABLE RWAELP", 0x31, "Hangul"),
    c(0xB8A3, None, "HANGUL SYLLABLE RWAELH", 0x31, "Hangul"),
    c(0xB8A4, None, "HANGUL SYLLABLE RWAEM", 0x31, "Hangul"),
    c(0xB8A5, None, "HANGUL SYLLABLE RWAEB", 0x31, "Hangul"),
    c(0xB8A6, None, "HANGUL SYLLABLE RWAEBS", 0x31, "Hangul"),
    c(0xB8A7, None, "HANGUL SYLLABLE RWAES", 0x31, "Hangul"),
    c(0xB8A8, None, "HANGUL SYLLABLE RWAESS", 0x31, "Hangul"),
    c(0xB8A9, None, "HANGUL SYLLABLE RWAENG", 0x31, "Hangul"),
    c(0xB8AA, None, "HANGUL SYLLABLE RWAEJ", 0x31, "Hangul"),
    c(0xB8AB, None, "HANGUL SYLLABLE RWAEC", 0x31, "Hangul"),
    c(0xB8AC, None, "HANGUL SYLLABLE RWAEK", 0x31, "Hangul"),
    c(0xB8AD, None, "HANGUL SYLLABLE RWAET", 0x31, "Hangul"),
    c(0xB8AE, None, "HANGUL SYLLABLE RWAEP", 0x31, "Hangul"),
    c(0xB8AF, None, "HANGUL SYLLABLE RWAEH", 0x31, "Hangul"),
    c(0xB8B0, None, "HANGUL SYLLABLE ROE", 0x31, "Hangul"),
    c(0xB8B1, None, "HANGUL SYLLABLE ROEG", 0x31, "Hangul"),
    c(0xB8B2, None, "HANGUL SYLLABLE ROEGG", 0x31, "Hangul"),
    c(0xB8B3, None, "HANGUL SYLLABLE ROEGS", 0x31, "Hangul"),
    c(0xB8B4, None, "HANGUL SYLLABLE ROEN", 0x31, "Hangul"),
    c(0xB8B5, None, "HANGUL SYLLABLE ROENJ", 0x31, "Hangul"),
    c(0xB8B6, None, "HANGUL SYLLABLE ROENH", 0x31, "Hangul"),
    c(0xB8B7, None, "HANGUL SYLLABLE ROED", 0x31, "Hangul"),
    c(0xB8B8, None, "HANGUL SYLLABLE ROEL", 0x31, "Hangul"),
    c(0xB8B9, None, "HANGUL SYLLABLE ROELG", 0x31, "Hangul"),
    c(0xB8BA, None, "HANGUL SYLLABLE ROELM", 0x31, "Hangul"),
    c(0xB8BB, None, "HANGUL SYLLABLE ROELB", 0x31, "Hangul"),
    c(0xB8BC, None, "HANGUL SYLLABLE ROELS", 0x31, "Hangul"),
    c(0xB8BD, None, "HANGUL SYLLABLE ROELT", 0x31, "Hangul"),
    c(0xB8BE, None, "HANGUL SYLLABLE ROELP", 0x31, "Hangul"),
    c(0xB8BF, None, "HANGUL SYLLABLE ROELH", 0x31, "Hangul"),
    c(0xB8C0, None, "HANGUL SYLLABLE ROEM", 0x31, "Hangul"),
    c(0xB8C1, None, "HANGUL SYLLABLE ROEB", 0x31, "Hangul"),
    c(0xB8C2, None, "HANGUL SYLLABLE ROEBS", 0x31, "Hangul"),
    c(0xB8C3, None, "HANGUL SYLLABLE ROES", 0x31, "Hangul"),
    c(0xB8C4, None, "HANGUL SYLLABLE ROESS", 0x31, "Hangul"),
    c(0xB8C5, None, "HANGUL SYLLABLE ROENG", 0x31, "Hangul"),
    c(0xB8C6, None, "HANGUL SYLLABLE ROEJ", 0x31, "Hangul"),
    c(0xB8C7, None, "HANGUL SYLLABLE ROEC", 0x31, "Hangul"),
    c(0xB8C8, None, "HANGUL SYLLABLE ROEK", 0x31, "Hangul"),
    c(0xB8C9, None, "HANGUL SYLLABLE ROET", 0x31, "Hangul"),
    c(0xB8CA, None, "HANGUL SYLLABLE ROEP", 0x31, "Hangul"),
    c(0xB8CB, None, "HANGUL SYLLABLE ROEH", 0x31, "Hangul"),
    c(0xB8CC, None, "HANGUL SYLLABLE RYO", 0x31, "Hangul"),
    c(0xB8CD, None, "HANGUL SYLLABLE RYOG", 0x31, "Hangul"),
    c(0xB8CE, None, "HANGUL SYLLABLE RYOGG", 0x31, "Hangul"),
    c(0xB8CF, None, "HANGUL SYLLABLE RYOGS", 0x31, "Hangul"),
    c(0xB8D0, None, "HANGUL SYLLABLE RYON", 0x31, "Hangul"),
    c(0xB8D1, None, "HANGUL SYLLABLE RYONJ", 0x31, "Hangul"),
    c(0xB8D2, None, "HANGUL SYLLABLE RYONH", 0x31, "Hangul"),
    c(0xB8D3, None, "HANGUL SYLLABLE RYOD", 0x31, "Hangul"),
    c(0xB8D4, None, "HANGUL SYLLABLE RYOL", 0x31, "Hangul"),
    c(0xB8D5, None, "HANGUL SYLLABLE RYOLG", 0x31, "Hangul"),
    c(0xB8D6, None, "HANGUL SYLLABLE RYOLM", 0x31, "Hangul"),
    c(0xB8D7, None, "HANGUL SYLLABLE RYOLB", 0x31, "Hangul"),
    c(0xB8D8, None, "HANGUL SYLLABLE RYOLS", 0x31, "Hangul"),
    c(0xB8D9, None, "HANGUL SYLLABLE RYOLT", 0x31, "Hangul"),
    c(0xB8DA, None, "HANGUL SYLLABLE RYOLP", 0x31, "Hangul"),
    c(0xB8DB, None, "HANGUL SYLLABLE RYOLH", 0x31, "Hangul"),
    c(0xB8DC, None, "HANGUL SYLLABLE RYOM", 0x31, "Hangul"),
    c(0xB8DD, None, "HANGUL SYLLABLE RYOB", 0x31, "Hangul"),
    c(0xB8DE, None, "HANGUL SYLLABLE RYOBS", 0x31, "Hangul"),
    c(0xB8DF, None, "HANGUL SYLLABLE RYOS", 0x31, "Hangul"),
    c(0xB8E0, None, "HANGUL SYLLABLE RYOSS", 0x31, "Hangul"),
    c(0xB8E1, None, "HANGUL SYLLABLE RYONG", 0x31, "Hangul"),
    c(0xB8E2, None, "HANGUL SYLLABLE RYOJ", 0x31, "Hangul"),
    c(0xB8E3, None, "HANGUL SYLLABLE RYOC", 0x31, "Hangul"),
    c(0xB8E4, None, "HANGUL SYLLABLE RYOK", 0x31, "Hangul"),
    c(0xB8E5, None, "HANGUL SYLLABLE RYOT", 0x31, "Hangul"),
    c(0xB8E6, None, "HANGUL SYLLABLE RYOP", 0x31, "Hangul"),
    c(0xB8E7, None, "HANGUL SYLLABLE RYOH", 0x31, "Hangul"),
    c(0xB8E8, None, "HANGUL SYLLABLE RU", 0x31, "Hangul"),
    c(0xB8E9, None, "HANGUL SYLLABLE RUG", 0x31, "Hangul"),
    c(0xB8EA, None, "HANGUL SYLLABLE RUGG", 0x31, "Hangul"),
    c(0xB8EB, None, "HANGUL SYLLABLE RUGS", 0x31, "Hangul"),
    c(0xB8EC, None, "HANGUL SYLLABLE RUN", 0x31, "Hangul"),
    c(0xB8ED, None, "HANGUL SYLLABLE RUNJ", 0x31, "Hangul"),
    c(0xB8EE, None, "HANGUL SYLLABLE RUNH", 0x31, "Hangul"),
    c(0xB8EF, None, "HANGUL SYLLABLE RUD", 0x31, "Hangul"),
    c(0xB8F0, None, "HANGUL SYLLABLE RUL", 0x31, "Hangul"),
    c(0xB8F1, None, "HANGUL SYLLABLE RULG", 0x31, "Hangul"),
    c(0xB8F2, None, "HANGUL SYLLABLE RULM", 0x31, "Hangul"),
    c(0xB8F3, None, "HANGUL SYLLABLE RULB", 0x31, "Hangul"),
    c(0xB8F4, None, "HANGUL SYLLABLE RULS", 0x31, "Hangul"),
    c(0xB8F5, None, "HANGUL SYLLABLE RULT", 0x31, "Hangul"),
    c(0xB8F6, None, "HANGUL SYLLABLE RULP", 0x31, "Hangul"),
    c(0xB8F7, None, "HANGUL SYLLABLE RULH", 0x31, "Hangul"),
    c(0xB8F8, None, "HANGUL SYLLABLE RUM", 0x31, "Hangul"),
    c(0xB8F9, None, "HANGUL SYLLABLE RUB", 0x31, "Hangul"),
    c(0xB8FA, None, "HANGUL SYLLABLE RUBS", 0x31, "Hangul"),
    c(0xB8FB, None, "HANGUL SYLLABLE RUS", 0x31, "Hangul"),
    c(0xB8FC, None, "HANGUL SYLLABLE RUSS", 0x31, "Hangul"),
    c(0xB8FD, None, "HANGUL SYLLABLE RUNG", 0x31, "Hangul"),
    c(0xB8FE, None, "HANGUL SYLLABLE RUJ", 0x31, "Hangul"),
    c(0xB8FF, None, "HANGUL SYLLABLE RUC", 0x31, "Hangul"),
    c(0xB900, None, "HANGUL SYLLABLE RUK", 0x31, "Hangul"),
    c(0xB901, None, "HANGUL SYLLABLE RUT", 0x31, "Hangul"),
    c(0xB902, None, "HANGUL SYLLABLE RUP", 0x31, "Hangul"),
    c(0xB903, None, "HANGUL SYLLABLE RUH", 0x31, "Hangul"),
    c(0xB904, None, "HANGUL SYLLABLE RWEO", 0x31, "Hangul"),
    c(0xB905, None, "HANGUL SYLLABLE RWEOG", 0x31, "Hangul"),
    c(0xB906, None, "HANGUL SYLLABLE RWEOGG", 0x31, "Hangul"),
    c(0xB907, None, "HANGUL SYLLABLE RWEOGS", 0x31, "Hangul"),
    c(0xB908, None, "HANGUL SYLLABLE RWEON", 0x31, "Hangul"),
    c(0xB909, None, "HANGUL SYLLABLE RWEONJ", 0x31, "Hangul"),
    c(0xB90A, None, "HANGUL SYLLABLE RWEONH", 0x31, "Hangul"),
    c(0xB90B, None, "HANGUL SYLLABLE RWEOD", 0x31, "Hangul"),
    c(0xB90C, None, "HANGUL SYLLABLE RWEOL", 0x31, "Hangul"),
    c(0xB90D, None, "HANGUL SYLLABLE RWEOLG", 0x31, "Hangul"),
    c(0xB90E, None, "HANGUL SYLLABLE RWEOLM", 0x31, "Hangul"),
    c(0xB90F, None, "HANGUL SYLLABLE RWEOLB", 0x31, "Hangul"),
    c(0xB910, None, "HANGUL SYLLABLE RWEOLS", 0x31, "Hangul"),
    c(0xB911, None, "HANGUL SYLLABLE RWEOLT", 0x31, "Hangul"),
    c(0xB912, None, "HANGUL SYLLABLE RWEOLP", 0x31, "Hangul"),
    c(0xB913, None, "HANGUL SYLLABLE RWEOLH", 0x31, "Hangul"),
    c(0xB914, None, "HANGUL SYLLABLE RWEOM", 0x31, "Hangul"),
    c(0xB915, None, "HANGUL SYLLABLE RWEOB", 0x31, "Hangul"),
    c(0xB916, None, "HANGUL SYLLABLE RWEOBS", 0x31, "Hangul"),
    c(0xB917, None, "HANGUL SYLLABLE RWEOS", 0x31, "Hangul"),
    c(0xB918, None, "HANGUL SYLLABLE RWEOSS", 0x31, "Hangul"),
    c(0xB919, None, "HANGUL SYLLABLE RWEONG", 0x31, "Hangul"),
    c(0xB91A, None, "HANGUL SYLLABLE RWEOJ", 0x31, "Hangul"),
    c(0xB91B, None, "HANGUL SYLLABLE RWEOC", 0x31, "Hangul"),
    c(0xB91C, None, "HANGUL SYLLABLE RWEOK", 0x31, "Hangul"),
    c(0xB91D, None, "HANGUL SYLLABLE RWEOT", 0x31, "Hangul"),
    c(0xB91E, None, "HANGUL SYLLABLE RWEOP", 0x31, "Hangul"),
    c(0xB91F, None, "HANGUL SYLLABLE RWEOH", 0x31, "Hangul"),
    c(0xB920, None, "HANGUL SYLLABLE RWE", 0x31, "Hangul"),
    c(0xB921, None, "HANGUL SYLLABLE RWEG", 0x31, "Hangul"),
    c(0xB922, None, "HANGUL SYLLABLE RWEGG", 0x31, "Hangul"),
    c(0xB923, None, "HANGUL SYLLABLE RWEGS", 0x31, "Hangul"),
    c(0xB924, None, "HANGUL SYLLABLE RWEN", 0x31, "Hangul"),
    c(0xB925, None, "HANGUL SYLLABLE RWENJ", 0x31, "Hangul"),
    c(0xB926, None, "HANGUL SYLLABLE RWENH", 0x31, "Hangul"),
    c(0xB927, None, "HANGUL SYLLABLE RWED", 0x31, "Hangul"),
    c(0xB928, None, "HANGUL SYLLABLE RWEL", 0x31, "Hangul"),
    c(0xB929, None, "HANGUL SYLLABLE RWELG", 0x31, "Hangul"),
    c(0xB92A, None, "HANGUL SYLLABLE RWELM", 0x31, "Hangul"),
    c(0xB92B, None, "HANGUL SYLLABLE RWELB", 0x31, "Hangul"),
    c(0xB92C, None, "HANGUL SYLLABLE RWELS", 0x31, "Hangul"),
    c(0xB92D, None, "HANGUL SYLLABLE RWELT", 0x31, "Hangul"),
    c(0xB92E, None, "HANGUL SYLLABLE RWELP", 0x31, "Hangul"),
    c(0xB92F, None, "HANGUL SYLLABLE RWELH", 0x31, "Hangul"),
    c(0xB930, None, "HANGUL SYLLABLE RWEM", 0x31, "Hangul"),
    c(0xB931, None, "HANGUL SYLLABLE RWEB", 0x31, "Hangul"),
    c(0xB932, None, "HANGUL SYLLABLE RWEBS", 0x31, "Hangul"),
    c(0xB933, None, "HANGUL SYLLABLE RWES", 0x31, "Hangul"),
    c(0xB934, None, "HANGUL SYLLABLE RWESS", 0x31, "Hangul"),
    c(0xB935, None, "HANGUL SYLLABLE RWENG", 0x31, "Hangul"),
    c(0xB936, None, "HANGUL SYLLABLE RWEJ", 0x31, "Hangul"),
    c(0xB937, None, "HANGUL SYLLABLE RWEC", 0x31, "Hangul"),
    c(0xB938, None, "HANGUL SYLLABLE RWEK", 0x31, "Hangul"),
    c(0xB939, None, "HANGUL SYLLABLE RWET", 0x31, "Hangul"),
    c(0xB93A, None, "HANGUL SYLLABLE RWEP", 0x31, "Hangul"),
    c(0xB93B, None, "HANGUL SYLLABLE RWEH", 0x31, "Hangul"),
    c(0xB93C, None, "HANGUL SYLLABLE RWI", 0x31, "Hangul"),
    c(0xB93D, None, "HANGUL SYLLABLE RWIG", 0x31, "Hangul"),
    c(0xB93E, None, "HANGUL SYLLABLE RWIGG", 0x31, "Hangul"),
    c(0xB93F, None, "HANGUL SYLLABLE RWIGS", 0x31, "Hangul"),
    c(0xB940, None, "HANGUL SYLLABLE RWIN", 0x31, "Hangul"),
    c(0xB941, None, "HANGUL SYLLABLE RWINJ", 0x31, "Hangul"),
    c(0xB942, None, "HANGUL SYLLABLE RWINH", 0x31, "Hangul"),
    c(0xB943, None, "HANGUL SYLLABLE RWID", 0x31, "Hangul"),
    c(0xB944, None, "HANGUL SYLLABLE RWIL", 0x31, "Hangul"),
    c(0xB945, None, "HANGUL SYLLABLE RWILG", 0x31, "Hangul"),
    c(0xB946, None, "HANGUL SYLLABLE RWILM", 0x31, "Hangul"),
    c(0xB947, None, "HANGUL SYLLABLE RWILB", 0x31, "Hangul"),
    c(0xB948, None, "HANGUL SYLLABLE RWILS", 0x31, "Hangul"),
    c(0xB949, None, "HANGUL SYLLABLE RWILT", 0x31, "Hangul"),
    c(0xB94A, None, "HANGUL SYLLABLE RWILP", 0x31, "Hangul"),
    c(0xB94B, None, "HANGUL SYLLABLE RWILH", 0x31, "Hangul"),
    c(0xB94C, None, "HANGUL SYLLABLE RWIM", 0x31, "Hangul"),
    c(0xB94D, None, "HANGUL SYLLABLE RWIB", 0x31, "Hangul"),
    c(0xB94E, None, "HANGUL SYLLABLE RWIBS", 0x31, "Hangul"),
    c(0xB94F, None, "HANGUL SYLLABLE RWIS", 0x31, "Hangul"),
    c(0xB950, None, "HANGUL SYLLABLE RWISS", 0x31, "Hangul"),
    c(0xB951, None, "HANGUL SYLLABLE RWING", 0x31, "Hangul"),
    c(0xB952, None, "HANGUL SYLLABLE RWIJ", 0x31, "Hangul"),
    c(0xB953, None, "HANGUL SYLLABLE RWIC", 0x31, "Hangul"),
    c(0xB954, None, "HANGUL SYLLABLE RWIK", 0x31, "Hangul"),
    c(0xB955, None, "HANGUL SYLLABLE RWIT", 0x31, "Hangul"),
    c(0xB956, None, "HANGUL SYLLABLE RWIP", 0x31, "Hangul"),
    c(0xB957, None, "HANGUL SYLLABLE RWIH", 0x31, "Hangul"),
    c(0xB958, None, "HANGUL SYLLABLE RYU", 0x31, "Hangul"),
    c(0xB959, None, "HANGUL SYLLABLE RYUG", 0x31, "Hangul"),
    c(0xB95A, None, "HANGUL SYLLABLE RYUGG", 0x31, "Hangul"),
    c(0xB95B, None, "HANGUL SYLLABLE RYUGS", 0x31, "Hangul"),
    c(0xB95C, None, "HANGUL SYLLABLE RYUN", 0x31, "Hangul"),
    c(0xB95D, None, "HANGUL SYLLABLE RYUNJ", 0x31, "Hangul"),
    c(0xB95E, None, "HANGUL SYLLABLE RYUNH", 0x31, "Hangul"),
    c(0xB95F, None, "HANGUL SYLLABLE RYUD", 0x31, "Hangul"),
    c(0xB960, None, "HANGUL SYLLABLE RYUL", 0x31, "Hangul"),
    c(0xB961, None, "HANGUL SYLLABLE RYULG", 0x31, "Hangul"),
    c(0xB962, None, "HANGUL SYLLABLE RYULM", 0x31, "Hangul"),
    c(0xB963, None, "HANGUL SYLLABLE RYULB", 0x31, "Hangul"),
    c(0xB964, None, "HANGUL SYLLABLE RYULS", 0x31, "Hangul"),
    c(0xB965, None, "HANGUL SYLLABLE RYULT", 0x31, "Hangul"),
    c(0xB966, None, "HANGUL SYLLABLE RYULP", 0x31, "Hangul"),
    c(0xB967, None, "HANGUL SYLLABLE RYULH", 0x31, "Hangul"),
    c(0xB968, None, "HANGUL SYLLABLE RYUM", 0x31, "Hangul"),
    c(0xB969, None, "HANGUL SYLLABLE RYUB", 0x31, "Hangul"),
    c(0xB96A, None, "HANGUL SYLLABLE RYUBS", 0x31, "Hangul"),
    c(0xB96B, None, "HANGUL SYLLABLE RYUS", 0x31, "Hangul"),
    c(0xB96C, None, "HANGUL SYLLABLE RYUSS", 0x31, "Hangul"),
    c(0xB96D, None, "HANGUL SYLLABLE RYUNG", 0x31, "Hangul"),
    c(0xB96E, None, "HANGUL SYLLABLE RYUJ", 0x31, "Hangul"),
    c(0xB96F, None, "HANGUL SYLLABLE RYUC", 0x31, "Hangul"),
    c(0xB970, None, "HANGUL SYLLABLE RYUK", 0x31, "Hangul"),
    c(0xB971, None, "HANGUL SYLLABLE RYUT", 0x31, "Hangul"),
    c(0xB972, None, "HANGUL SYLLABLE RYUP", 0x31, "Hangul"),
    c(0xB973, None, "HANGUL SYLLABLE RYUH", 0x31, "Hangul"),
    c(0xB974, None, "HANGUL SYLLABLE REU", 0x31, "Hangul"),
    c(0xB975, None, "HANGUL SYLLABLE REUG", 0x31, "Hangul"),
    c(0xB976, None, "HANGUL SYLLABLE REUGG", 0x31, "Hangul"),
    c(0xB977, None, "HANGUL SYLLABLE REUGS", 0x31, "Hangul"),
    c(0xB978, None, "HANGUL SYLLABLE REUN", 0x31, "Hangul"),
    c(0xB979, None, "HANGUL SYLLABLE REUNJ", 0x31, "Hangul"),
    c(0xB97A, None, "HANGUL SYLLABLE REUNH", 0x31, "Hangul"),
    c(0xB97B, None, "HANGUL SYLLABLE REUD", 0x31, "Hangul"),
    c(0xB97C, None, "HANGUL SYLLABLE REUL", 0x31, "Hangul"),
    c(0xB97D, None, "HANGUL SYLLABLE REULG", 0x31, "Hangul"),
    c(0xB97E, None, "HANGUL SYLLABLE REULM", 0x31, "Hangul"),
    c(0xB97F, None, "HANGUL SYLLABLE REULB", 0x31, "Hangul"),
    c(0xB980, None, "HANGUL SYLLABLE REULS", 0x31, "Hangul"),
    c(0xB981, None, "HANGUL SYLLABLE REULT", 0x31, "Hangul"),
    c(0xB982, None, "HANGUL SYLLABLE REULP", 0x31, "Hangul"),
    c(0xB983, None, "HANGUL SYLLABLE REULH", 0x31, "Hangul"),
    c(0xB984, None, "HANGUL SYLLABLE REUM", 0x31, "Hangul"),
    c(0xB985, None, "HANGUL SYLLABLE REUB", 0x31, "Hangul"),
    c(0xB986, None, "HANGUL SYLLABLE REUBS", 0x31, "Hangul"),
    c(0xB987, None, "HANGUL SYLLABLE REUS", 0x31, "Hangul"),
    c(0xB988, None, "HANGUL SYLLABLE REUSS", 0x31, "Hangul"),
    c(0xB989, None, "HANGUL SYLLABLE REUNG", 0x31, "Hangul"),
    c(0xB98A, None, "HANGUL SYLLABLE REUJ", 0x31, "Hangul"),
    c(0xB98B, None, "HANGUL SYLLABLE REUC", 0x31, "Hangul"),
    c(0xB98C, None, "HANGUL SYLLABLE REUK", 0x31, "Hangul"),
    c(0xB98D, None, "HANGUL SYLLABLE REUT", 0x31, "Hangul"),
    c(0xB98E, None, "HANGUL SYLLABLE REUP", 0x31, "Hangul"),
    c(0xB98F, None, "HANGUL SYLLABLE REUH", 0x31, "Hangul"),
    c(0xB990, None, "HANGUL SYLLABLE RYI", 0x31, "Hangul"),
    c(0xB991, None, "HANGUL SYLLABLE RYIG", 0x31, "Hangul"),
    c(0xB992, None, "HANGUL SYLLABLE RYIGG", 0x31, "Hangul"),
    c(0xB993, None, "HANGUL SYLLABLE RYIGS", 0x31, "Hangul"),
    c(0xB994, None, "HANGUL SYLLABLE RYIN", 0x31, "Hangul"),
    c(0xB995, None, "HANGUL SYLLABLE RYINJ", 0x31, "Hangul"),
    c(0xB996, None, "HANGUL SYLLABLE RYINH", 0x31, "Hangul"),
    c(0xB997, None, "HANGUL SYLLABLE RYID", 0x31, "Hangul"),
    c(0xB998, None, "HANGUL SYLLABLE RYIL", 0x31, "Hangul"),
    c(0xB999, None, "HANGUL SYLLABLE RYILG", 0x31, "Hangul"),
    c(0xB99A, None, "HANGUL SYLLABLE RYILM", 0x31, "Hangul"),
    c(0xB99B, None, "HANGUL SYLLABLE RYILB", 0x31, "Hangul"),
    c(0xB99C, None, "HANGUL SYLLABLE RYILS", 0x31, "Hangul"),
    c(0xB99D, None, "HANGUL SYLLABLE RYILT", 0x31, "Hangul"),
    c(0xB99E, None, "HANGUL SYLLABLE RYILP", 0x31, "Hangul"),
    c(0xB99F, None, "HANGUL SYLLABLE RYILH", 0x31, "Hangul"),
    c(0xB9A0, None, "HANGUL SYLLABLE RYIM", 0x31, "Hangul"),
    c(0xB9A1, None, "HANGUL SYLLABLE RYIB", 0x31, "Hangul"),
    c(0xB9A2, None, "HANGUL SYLLABLE RYIBS", 0x31, "Hangul"),
    c(0xB9A3, None, "HANGUL SYLLABLE RYIS", 0x31, "Hangul"),
    c(0xB9A4, None, "HANGUL SYLLABLE RYISS", 0x31, "Hangul"),
    c(0xB9A5, None, "HANGUL SYLLABLE RYING", 0x31, "Hangul"),
    c(0xB9A6, None, "HANGUL SYLLABLE RYIJ", 0x31, "Hangul"),
    c(0xB9A7, None, "HANGUL SYLLABLE RYIC", 0x31, "Hangul"),
    c(0xB9A8, None, "HANGUL SYLLABLE RYIK", 0x31, "Hangul"),
    c(0xB9A9, None, "HANGUL SYLLABLE RYIT", 0x31, "Hangul"),
    c(0xB9AA, None, "HANGUL SYLLABLE RYIP", 0x31, "Hangul"),
    c(0xB9AB, None, "HANGUL SYLLABLE RYIH", 0x31, "Hangul"),
    c(0xB9AC, None, "HANGUL SYLLABLE RI", 0x31, "Hangul"),
    c(0xB9AD, None, "HANGUL SYLLABLE RIG", 0x31, "Hangul"),
    c(0xB9AE, None, "HANGUL SYLLABLE RIGG", 0x31, "Hangul"),
    c(0xB9AF, None, "HANGUL SYLLABLE RIGS", 0x31, "Hangul"),
    c(0xB9B0, None, "HANGUL SYLLABLE RIN", 0x31, "Hangul"),
    c(0xB9B1, None, "HANGUL SYLLABLE RINJ", 0x31, "Hangul"),
    c(0xB9B2, None, "HANGUL SYLLABLE RINH", 0x31, "Hangul"),
    c(0xB9B3, None, "HANGUL SYLLABLE RID", 0x31, "Hangul"),
    c(0xB9B4, None, "HANGUL SYLLABLE RIL", 0x31, "Hangul"),
    c(0xB9B5, None, "HANGUL SYLLABLE RILG", 0x31, "Hangul"),
    c(0xB9B6, None, "HANGUL SYLLABLE RILM", 0x31, "Hangul"),
    c(0xB9B7, None, "HANGUL SYLLABLE RILB", 0x31, "Hangul"),
    c(0xB9B8, None, "HANGUL SYLLABLE RILS", 0x31, "Hangul"),
    c(0xB9B9, None, "HANGUL SYLLABLE RILT", 0x31, "Hangul"),
    c(0xB9BA, None, "HANGUL SYLLABLE RILP", 0x31, "Hangul"),
    c(0xB9BB, None, "HANGUL SYLLABLE RILH", 0x31, "Hangul"),
    c(0xB9BC, None, "HANGUL SYLLABLE RIM", 0x31, "Hangul"),
    c(0xB9BD, None, "HANGUL SYLLABLE RIB", 0x31, "Hangul"),
    c(0xB9BE, None, "HANGUL SYLLABLE RIBS", 0x31, "Hangul"),
    c(0xB9BF, None, "HANGUL SYLLABLE RIS", 0x31, "Hangul"),
    c(0xB9C0, None, "HANGUL SYLLABLE RISS", 0x31, "Hangul"),
    c(0xB9C1, None, "HANGUL SYLLABLE RING", 0x31, "Hangul"),
    c(0xB9C2, None, "HANGUL SYLLABLE RIJ", 0x31, "Hangul"),
    c(0xB9C3, None, "HANGUL SYLLABLE RIC", 0x31, "Hangul"),
    c(0xB9C4, None, "HANGUL SYLLABLE RIK", 0x31, "Hangul"),
    c(0xB9C5, None, "HANGUL SYLLABLE RIT", 0x31, "Hangul"),
    c(0xB9C6, None, "HANGUL SYLLABLE RIP", 0x31, "Hangul"),
    c(0xB9C7, None, "HANGUL SYLLABLE RIH", 0x31, "Hangul"),
    c(0xB9C8, None, "HANGUL SYLLABLE MA", 0x31, "Hangul"),
    c(0xB9C9, None, "HANGUL SYLLABLE MAG", 0x31, "Hangul"),
    c(0xB9CA, None, "HANGUL SYLLABLE MAGG", 0x31, "Hangul"),
    c(0xB9CB, None, "HANGUL SYLLABLE MAGS", 0x31, "Hangul"),
    c(0xB9CC, None, "HANGUL SYLLABLE MAN", 0x31, "Hangul"),
    c(0xB9CD, None, "HANGUL SYLLABLE MANJ", 0x31, "Hangul"),
    c(0xB9CE, None, "HANGUL SYLLABLE MANH", 0x31, "Hangul"),
    c(0xB9CF, None, "HANGUL SYLLABLE MAD", 0x31, "Hangul"),
    c(0xB9D0, None, "HANGUL SYLLABLE MAL", 0x31, "Hangul"),
    c(0xB9D1, None, "HANGUL SYLLABLE MALG", 0x31, "Hangul"),
    c(0xB9D2, None, "HANGUL SYLLABLE MALM", 0x31, "Hangul"),
    c(0xB9D3, None, "HANGUL SYLLABLE MALB", 0x31, "Hangul"),
    c(0xB9D4, None, "HANGUL SYLLABLE MALS", 0x31, "Hangul"),
    c(0xB9D5, None, "HANGUL SYLLABLE MALT", 0x31, "Hangul"),
    c(0xB9D6, None, "HANGUL SYLLABLE MALP", 0x31, "Hangul"),
    c(0xB9D7, None, "HANGUL SYLLABLE MALH", 0x31, "Hangul"),
    c(0xB9D8, None, "HANGUL SYLLABLE MAM", 0x31, "Hangul"),
    c(0xB9D9, None, "HANGUL SYLLABLE MAB", 0x31, "Hangul"),
    c(0xB9DA, None, "HANGUL SYLLABLE MABS", 0x31, "Hangul"),
    c(0xB9DB, None, "HANGUL SYLLABLE MAS", 0x31, "Hangul"),
    c(0xB9DC, None, "HANGUL SYLLABLE MASS", 0x31, "Hangul"),
    c(0xB9DD, None, "HANGUL SYLLABLE MANG", 0x31, "Hangul"),
    c(0xB9DE, None, "HANGUL SYLLABLE MAJ", 0x31, "Hangul"),
    c(0xB9DF, None, "HANGUL SYLLABLE MAC", 0x31, "Hangul"),
    c(0xB9E0, None, "HANGUL SYLLABLE MAK", 0x31, "Hangul"),
    c(0xB9E1, None, "HANGUL SYLLABLE MAT", 0x31, "Hangul"),
    c(0xB9E2, None, "HANGUL SYLLABLE MAP", 0x31, "Hangul"),
    c(0xB9E3, None, "HANGUL SYLLABLE MAH", 0x31, "Hangul"),
    c(0xB9E4, None, "HANGUL SYLLABLE MAE", 0x31, "Hangul"),
    c(0xB9E5, None, "HANGUL SYLLABLE MAEG", 0x31, "Hangul"),
    c(0xB9E6, None, "HANGUL SYLLABLE MAEGG", 0x31, "Hangul"),
    c(0xB9E7, None, "HANGUL SYLLABLE MAEGS", 0x31, "Hangul"),
    c(0xB9E8, None, "HANGUL SYLLABLE MAEN", 0x31, "Hangul"),
    c(0xB9E9, None, "HANGUL SYLLABLE MAENJ", 0x31, "Hangul"),
    c(0xB9EA, None, "HANGUL SYLLABLE MAENH", 0x31, "Hangul"),
    c(0xB9EB, None, "HANGUL SYLLABLE MAED", 0x31, "Hangul"),
    c(0xB9EC, None, "HANGUL SYLLABLE MAEL", 0x31, "Hangul"),
    c(0xB9ED, None, "HANGUL SYLLABLE MAELG", 0x31, "Hangul"),
    c(0xB9EE, None, "HANGUL SYLLABLE MAELM", 0x31, "Hangul"),
    c(0xB9EF, None, "HANGUL SYLLABLE MAELB", 0x31, "Hangul"),
    c(0xB9F0, None, "HANGUL SYLLABLE MAELS", 0x31, "Hangul"),
    c(0xB9F1, None, "HANGUL SYLLABLE MAELT", 0x31, "Hangul"),
    c(0xB9F2, None, "HANGUL SYLLABLE MAELP", 0x31, "Hangul"),
    c(0xB9F3, None, "HANGUL SYLLABLE MAELH", 0x31, "Hangul"),
    c(0xB9F4, None, "HANGUL SYLLABLE MAEM", 0x31, "Hangul"),
    c(0xB9F5, None, "HANGUL SYLLABLE MAEB", 0x31, "Hangul"),
    c(0xB9F6, None, "HANGUL SYLLABLE MAEBS", 0x31, "Hangul"),
    c(0xB9F7, None, "HANGUL SYLLABLE MAES", 0x31, "Hangul"),
    c(0xB9F8, None, "HANGUL SYLLABLE MAESS", 0x31, "Hangul"),
    c(0xB9F9, None, "HANGUL SYLLABLE MAENG", 0x31, "Hangul"),
    c(0xB9FA, None, "HANGUL SYLLABLE MAEJ", 0x31, "Hangul"),
    c(0xB9FB, None, "HANGUL SYLLABLE MAEC", 0x31, "Hangul"),
    c(0xB9FC, None, "HANGUL SYLLABLE MAEK", 0x31, "Hangul"),
    c(0xB9FD, None, "HANGUL SYLLABLE MAET", 0x31, "Hangul"),
    c(0xB9FE, None, "HANGUL SYLLABLE MAEP", 0x31, "Hangul"),
    c(0xB9FF, None, "HANGUL SYLLABLE MAEH", 0x31, "Hangul"),
    c(0xBA00, None, "HANGUL SYLLABLE MYA", 0x31, "Hangul"),
    c(0xBA01, None, "HANGUL SYLLABLE MYAG", 0x31, "Hangul"),
    c(0xBA02, None, "HANGUL SYLLABLE MYAGG", 0x31, "Hangul"),
    c(0xBA03, None, "HANGUL SYLLABLE MYAGS", 0x31, "Hangul"),
    c(0xBA04, None, "HANGUL SYLLABLE MYAN", 0x31, "Hangul"),
    c(0xBA05, None, "HANGUL SYLLABLE MYANJ", 0x31, "Hangul"),
    c(0xBA06, None, "HANGUL SYLLABLE MYANH", 0x31, "Hangul"),
    c(0xBA07, None, "HANGUL SYLLABLE MYAD", 0x31, "Hangul"),
    c(0xBA08, None, "HANGUL SYLLABLE MYAL", 0x31, "Hangul"),
    c(0xBA09, None, "HANGUL SYLLABLE MYALG", 0x31, "Hangul"),
    c(0xBA0A, None, "HANGUL SYLLABLE MYALM", 0x31, "Hangul"),
    c(0xBA0B, None, "HANGUL SYLLABLE MYALB", 0x31, "Hangul"),
    c(0xBA0C, None, "HANGUL SYLLABLE MYALS", 0x31, "Hangul"),
    c(0xBA0D, None, "HANGUL SYLLABLE MYALT", 0x31, "Hangul"),
    c(0xBA0E, None, "HANGUL SYLLABLE MYALP", 0x31, "Hangul"),
    c(0xBA0F, None, "HANGUL SYLLABLE MYALH", 0x31, "Hangul"),
    c(0xBA10, None, "HANGUL SYLLABLE MYAM", 0x31, "Hangul"),
    c(0xBA11, None, "HANGUL SYLLABLE MYAB", 0x31, "Hangul"),
    c(0xBA12, None, "HANGUL SYLLABLE MYABS", 0x31, "Hangul"),
    c(0xBA13, None, "HANGUL SYLLABLE MYAS", 0x31, "Hangul"),
    c(0xBA14, None, "HANGUL SYLLABLE MYASS", 0x31, "Hangul"),
    c(0xBA15, None, "HANGUL SYLLABLE MYANG", 0x31, "Hangul"),
    c(0xBA16, None, "HANGUL SYLLABLE MYAJ", 0x31, "Hangul"),
    c(0xBA17, None, "HANGUL SYLLABLE MYAC", 0x31, "Hangul"),
    c(0xBA18, None, "HANGUL SYLLABLE MYAK", 0x31, "Hangul"),
    c(0xBA19, None, "HANGUL SYLLABLE MYAT", 0x31, "Hangul"),
    c(0xBA1A, None, "HANGUL SYLLABLE MYAP", 0x31, "Hangul"),
    c(0xBA1B, None, "HANGUL SYLLABLE MYAH", 0x31, "Hangul"),
    c(0xBA1C, None, "HANGUL SYLLABLE MYAE", 0x31, "Hangul"),
    c(0xBA1D, None, "HANGUL SYLLABLE MYAEG", 0x31, "Hangul"),
    c(0xBA1E, None, "HANGUL SYLLABLE MYAEGG", 0x31, "Hangul"),
    c(0xBA1F, None, "HANGUL SYLLABLE MYAEGS", 0x31, "Hangul"),
    c(0xBA20, None, "HANGUL SYLLABLE MYAEN", 0x31, "Hangul"),
    c(0xBA21, None, "HANGUL SYLLABLE MYAENJ", 0x31, "Hangul"),
    c(0xBA22, None, "HANGUL SYLLABLE MYAENH", 0x31, "Hangul"),
    c(0xBA23, None, "HANGUL SYLLABLE MYAED", 0x31, "Hangul"),
    c(0xBA24, None, "HANGUL SYLLABLE MYAEL", 0x31, "Hangul"),
    c(0xBA25, None, "HANGUL SYLLABLE MYAELG", 0x31, "Hangul"),
    c(0xBA26, None, "HANGUL SYLLABLE MYAELM", 0x31, "Hangul"),
    c(0xBA27, None, "HANGUL SYLLABLE MYAELB", 0x31, "Hangul"),
    c(0xBA28, None, "HANGUL SYLLABLE MYAELS", 0x31, "Hangul"),
    c(0xBA29, None, "HANGUL SYLLABLE MYAELT", 0x31, "Hangul"),
    c(0xBA2A, None, "HANGUL SYLLABLE MYAELP", 0x31, "Hangul"),
    c(0xBA2B, None, "HANGUL SYLLABLE MYAELH", 0x31, "Hangul"),
    c(0xBA2C, None, "HANGUL SYLLABLE MYAEM", 0x31, "Hangul"),
    c(0xBA2D, None, "HANGUL SYLLABLE MYAEB", 0x31, "Hangul"),
    c(0xBA2E, None, "HANGUL SYLLABLE MYAEBS", 0x31, "Hangul"),
    c(0xBA2F, None, "HANGUL SYLLABLE MYAES", 0x31, "Hangul"),
    c(0xBA30, None, "HANGUL SYLLABLE MYAESS", 0x31, "Hangul"),
    c(0xBA31, None, "HANGUL SYLLABLE MYAENG", 0x31, "Hangul"),
    c(0xBA32, None, "HANGUL SYLLABLE MYAEJ", 0x31, "Hangul"),
    c(0xBA33, None, "HANGUL SYLLABLE MYAEC", 0x31, "Hangul"),
    c(0xBA34, None, "HANGUL SYLLABLE MYAEK", 0x31, "Hangul"),
    c(0xBA35, None, "HANGUL SYLLABLE MYAET", 0x31, "Hangul"),
    c(0xBA36, None, "HANGUL SYLLABLE MYAEP", 0x31, "Hangul"),
    c(0xBA37, None, "HANGUL SYLLABLE MYAEH", 0x31, "Hangul"),
    c(0xBA38, None, "HANGUL SYLLABLE MEO", 0x31, "Hangul"),
    c(0xBA39, None, "HANGUL SYLLABLE MEOG", 0x31, "Hangul"),
    c(0xBA3A, None, "HANGUL SYLLABLE MEOGG", 0x31, "Hangul"),
    c(0xBA3B, None, "HANGUL SYLLABLE MEOGS", 0x31, "Hangul"),
    c(0xBA3C, None, "HANGUL SYLLABLE MEON", 0x31, "Hangul"),
    c(0xBA3D, None, "HANGUL SYLLABLE MEONJ", 0x31, "Hangul"),
    c(0xBA3E, None, "HANGUL SYLLABLE MEONH", 0x31, "Hangul"),
    c(0xBA3F, None, "HANGUL SYLLABLE MEOD", 0x31, "Hangul"),
    c(0xBA40, None, "HANGUL SYLLABLE MEOL", 0x31, "Hangul"),
    c(0xBA41, None, "HANGUL SYLLABLE MEOLG", 0x31, "Hangul"),
    c(0xBA42, None, "HANGUL SYLLABLE MEOLM", 0x31, "Hangul"),
    c(0xBA43, None, "HANGUL SYLLABLE MEOLB", 0x31, "Hangul"),
    c(0xBA44, None, "HANGUL SYLLABLE MEOLS", 0x31, "Hangul"),
    c(0xBA45, None, "HANGUL SYLLABLE MEOLT", 0x31, "Hangul"),
    c(0xBA46, None, "HANGUL SYLLABLE MEOLP", 0x31, "Hangul"),
    c(0xBA47, None, "HANGUL SYLLABLE MEOLH", 0x31, "Hangul"),
    c(0xBA48, None, "HANGUL SYLLABLE MEOM", 0x31, "Hangul"),
    c(0xBA49, None, "HANGUL SYLLABLE MEOB", 0x31, "Hangul"),
    c(0xBA4A, None, "HANGUL SYLLABLE MEOBS", 0x31, "Hangul"),
    c(0xBA4B, None, "HANGUL SYLLABLE MEOS", 0x31, "Hangul"),
    c(0xBA4C, None, "HANGUL SYLLABLE MEOSS", 0x31, "Hangul"),
    c(0xBA4D, None, "HANGUL SYLLABLE MEONG", 0x31, "Hangul"),
    c(0xBA4E, None, "HANGUL SYLLABLE MEOJ", 0x31, "Hangul"),
    c(0xBA4F, None, "HANGUL SYLLABLE MEOC", 0x31, "Hangul"),
    c(0xBA50, None, "HANGUL SYLLABLE MEOK", 0x31, "Hangul"),
    c(0xBA51, None, "HANGUL SYLLABLE MEOT", 0x31, "Hangul"),
    c(0xBA52, None, "HANGUL SYLLABLE MEOP", 0x31, "Hangul"),
    c(0xBA53, None, "HANGUL SYLLABLE MEOH", 0x31, "Hangul"),
    c(0xBA54, None, "HANGUL SYLLABLE ME", 0x31, "Hangul"),
    c(0xBA55, None, "HANGUL SYLLABLE MEG", 0x31, "Hangul"),
    c(0xBA56, None, "HANGUL SYLLABLE MEGG", 0x31, "Hangul"),
    c(0xBA57, None, "HANGUL SYLLABLE MEGS", 0x31, "Hangul"),
    c(0xBA58, None, "HANGUL SYLLABLE MEN", 0x31, "Hangul"),
    c(0xBA59, None, "HANGUL SYLLABLE MENJ", 0x31, "Hangul"),
    c(0xBA5A, None, "HANGUL SYLLABLE MENH", 0x31, "Hangul"),
    c(0xBA5B, None, "HANGUL SYLLABLE MED", 0x31, "Hangul"),
    c(0xBA5C, None, "HANGUL SYLLABLE MEL", 0x31, "Hangul"),
    c(0xBA5D, None, "HANGUL SYLLABLE MELG", 0x31, "Hangul"),
    c(0xBA5E, None, "HANGUL SYLLABLE MELM", 0x31, "Hangul"),
    c(0xBA5F, None, "HANGUL SYLLABLE MELB", 0x31, "Hangul"),
    c(0xBA60, None, "HANGUL SYLLABLE MELS", 0x31, "Hangul"),
    c(0xBA61, None, "HANGUL SYLLABLE MELT", 0x31, "Hangul"),
    c(0xBA62, None, "HANGUL SYLLABLE MELP", 0x31, "Hangul"),
    c(0xBA63, None, "HANGUL SYLLABLE MELH", 0x31, "Hangul"),
    c(0xBA64, None, "HANGUL SYLLABLE MEM", 0x31, "Hangul"),
    c(0xBA65, None, "HANGUL SYLLABLE MEB", 0x31, "Hangul"),
    c(0xBA66, None, "HANGUL SYLLABLE MEBS", 0x31, "Hangul"),
    c(0xBA67, None, "HANGUL SYLLABLE MES", 0x31, "Hangul"),
    c(0xBA68, None, "HANGUL SYLLABLE MESS", 0x31, "Hangul"),
    c(0xBA69, None, "HANGUL SYLLABLE MENG", 0x31, "Hangul"),
    c(0xBA6A, None, "HANGUL SYLLABLE MEJ", 0x31, "Hangul"),
    c(0xBA6B, None, "HANGUL SYLLABLE MEC", 0x31, "Hangul"),
    c(0xBA6C, None, "HANGUL SYLLABLE MEK", 0x31, "Hangul"),
    c(0xBA6D, None, "HANGUL SYLLABLE MET", 0x31, "Hangul"),
    c(0xBA6E, None, "HANGUL SYLLABLE MEP", 0x31, "Hangul"),
    c(0xBA6F, None, "HANGUL SYLLABLE MEH", 0x31, "Hangul"),
    c(0xBA70, None, "HANGUL SYLLABLE MYEO", 0x31, "Hangul"),
    c(0xBA71, None, "HANGUL SYLLABLE MYEOG", 0x31, "Hangul"),
    c(0xBA72, None, "HANGUL SYLLABLE MYEOGG", 0x31, "Hangul"),
    c(0xBA73, None, "HANGUL SYLLABLE MYEOGS", 0x31, "Hangul"),
    c(0xBA74, None, "HANGUL SYLLABLE MYEON", 0x31, "Hangul"),
    c(0xBA75, None, "HANGUL SYLLABLE MYEONJ", 0x31, "Hangul"),
    c(0xBA76, None, "HANGUL SYLLABLE MYEONH", 0x31, "Hangul"),
    c(0xBA77, None, "HANGUL SYLLABLE MYEOD", 0x31, "Hangul"),
    c(0xBA78, None, "HANGUL SYLLABLE MYEOL", 0x31, "Hangul"),
    c(0xBA79, None, "HANGUL SYLLABLE MYEOLG", 0x31, "Hangul"),
    c(0xBA7A, None, "HANGUL SYLLABLE MYEOLM", 0x31, "Hangul"),
    c(0xBA7B, None, "HANGUL SYLLABLE MYEOLB", 0x31, "Hangul"),
    c(0xBA7C, None, "HANGUL SYLLABLE MYEOLS", 0x31, "Hangul"),
    c(0xBA7D, None, "HANGUL SYLLABLE MYEOLT", 0x31, "Hangul"),
    c(0xBA7E, None, "HANGUL SYLLABLE MYEOLP", 0x31, "Hangul"),
    c(0xBA7F, None, "HANGUL SYLLABLE MYEOLH", 0x31, "Hangul"),
    c(0xBA80, None, "HANGUL SYLLABLE MYEOM", 0x31, "Hangul"),
    c(0xBA81, None, "HANGUL SYLLABLE MYEOB", 0x31, "Hangul"),
    c(0xBA82, None, "HANGUL SYLLABLE MYEOBS", 0x31, "Hangul"),
    c(0xBA83, None, "HANGUL SYLLABLE MYEOS", 0x31, "Hangul"),
    c(0xBA84, None, "HANGUL SYLLABLE MYEOSS", 0x31, "Hangul"),
    c(0xBA85, None, "HANGUL SYLLABLE MYEONG", 0x31, "Hangul"),
    c(0xBA86, None, "HANGUL SYLLABLE MYEOJ", 0x31, "Hangul"),
    c(0xBA87, None, "HANGUL SYLLABLE MYEOC", 0x31, "Hangul"),
    c(0xBA88, None, "HANGUL SYLLABLE MYEOK", 0x31, "Hangul"),
    c(0xBA89, None, "HANGUL SYLLABLE MYEOT", 0x31, "Hangul"),
    c(0xBA8A, None, "HANGUL SYLLABLE MYEOP", 0x31, "Hangul"),
    c(0xBA8B, None, "HANGUL SYLLABLE MYEOH", 0x31, "Hangul"),
    c(0xBA8C, None, "HANGUL SYLLABLE MYE", 0x31, "Hangul"),
    c(0xBA8D, None, "HANGUL SYLLABLE MYEG", 0x31, "Hangul"),
    c(0xBA8E, None, "HANGUL SYLLABLE MYEGG", 0x31, "Hangul"),
    c(0xBA8F, None, "HANGUL SYLLABLE MYEGS", 0x31, "Hangul"),
    c(0xBA90, None, "HANGUL SYLLABLE MYEN", 0x31, "Hangul"),
    c(0xBA91, None, "HANGUL SYLLABLE MYENJ", 0x31, "Hangul"),
    c(0xBA92, None, "HANGUL SYLLABLE MYENH", 0x31, "Hangul"),
    c(0xBA93, None, "HANGUL SYLLABLE MYED", 0x31, "Hangul"),
    c(0xBA94, None, "HANGUL SYLLABLE MYEL", 0x31, "Hangul"),
    c(0xBA95, None, "HANGUL SYLLABLE MYELG", 0x31, "Hangul"),
    c(0xBA96, None, "HANGUL SYLLABLE MYELM", 0x31, "Hangul"),
    c(0xBA97, None, "HANGUL SYLLABLE MYELB", 0x31, "Hangul"),
    c(0xBA98, None, "HANGUL SYLLABLE MYELS", 0x31, "Hangul"),
    c(0xBA99, None, "HANGUL SYLLABLE MYELT", 0x31, "Hangul"),
    c(0xBA9A, None, "HANGUL SYLLABLE MYELP", 0x31, "Hangul"),
    c(0xBA9B, None, "HANGUL SYLLABLE MYELH", 0x31, "Hangul"),
    c(0xBA9C, None, "HANGUL SYLLABLE MYEM", 0x31, "Hangul"),
    c(0xBA9D, None, "HANGUL SYLLABLE MYEB", 0x31, "Hangul"),
    c(0xBA9E, None, "HANGUL SYLLABLE MYEBS", 0x31, "Hangul"),
    c(0xBA9F, None, "HANGUL SYLLABLE MYES", 0x31, "Hangul"),
    c(0xBAA0, None, "HANGUL SYLLABLE MYESS", 0x31, "Hangul"),
    c(0xBAA1, None, "HANGUL SYLLABLE MYENG", 0x31, "Hangul"),
    c(0xBAA2, None, "HANGUL SYLLABLE MYEJ", 0x31, "Hangul"),
    c(0xBAA3, None, "HANGUL SYLLABLE MYEC", 0x31, "Hangul"),
    c(0xBAA4, None, "HANGUL SYLLABLE MYEK", 0x31, "Hangul"),
    c(0xBAA5, None, "HANGUL SYLLABLE MYET", 0x31, "Hangul"),
    c(0xBAA6, None, "HANGUL SYLLABLE MYEP", 0x31, "Hangul"),
    c(0xBAA7, None, "HANGUL SYLLABLE MYEH", 0x31, "Hangul"),
    c(0xBAA8, None, "HANGUL SYLLABLE MO", 0x31, "Hangul"),
    c(0xBAA9, None, "HANGUL SYLLABLE MOG", 0x31, "Hangul"),
    c(0xBAAA, None, "HANGUL SYLLABLE MOGG", 0x31, "Hangul"),
    c(0xBAAB, None, "HANGUL SYLLABLE MOGS", 0x31, "Hangul"),
    c(0xBAAC, None, "HANGUL SYLLABLE MON", 0x31, "Hangul"),
    c(0xBAAD, None, "HANGUL SYLLABLE MONJ", 0x31, "Hangul"),
    c(0xBAAE, None, "HANGUL SYLLABLE MONH", 0x31, "Hangul"),
    c(0xBAAF, None, "HANGUL SYLLABLE MOD", 0x31, "Hangul"),
    c(0xBAB0, None, "HANGUL SYLLABLE MOL", 0x31, "Hangul"),
    c(0xBAB1, None, "HANGUL SYLLABLE MOLG", 0x31, "Hangul"),
    c(0xBAB2, None, "HANGUL SYLLABLE MOLM", 0x31, "Hangul"),
    c(0xBAB3, None, "HANGUL SYLLABLE MOLB", 0x31, "Hangul"),
    c(0xBAB4, None, "HANGUL SYLLABLE MOLS", 0x31, "Hangul"),
    c(0xBAB5, None, "HANGUL SYLLABLE MOLT", 0x31, "Hangul"),
    c(0xBAB6, None, "HANGUL SYLLABLE MOLP", 0x31, "Hangul"),
    c(0xBAB7, None, "HANGUL SYLLABLE MOLH", 0x31, "Hangul"),
    c(0xBAB8, None, "HANGUL SYLLABLE MOM", 0x31, "Hangul"),
    c(0xBAB9, None, "HANGUL SYLLABLE MOB", 0x31, "Hangul"),
    c(0xBABA, None, "HANGUL SYLLABLE MOBS", 0x31, "Hangul"),
    c(0xBABB, None, "HANGUL SYLLABLE MOS", 0x31, "Hangul"),
    c(0xBABC, None, "HANGUL SYLLABLE MOSS", 0x31, "Hangul"),
    c(0xBABD, None, "HANGUL SYLLABLE MONG", 0x31, "Hangul"),
    c(0xBABE, None, "HANGUL SYLLABLE MOJ", 0x31, "Hangul"),
    c(0xBABF, None, "HANGUL SYLLABLE MOC", 0x31, "Hangul"),
    c(0xBAC0, None, "HANGUL SYLLABLE MOK", 0x31, "Hangul"),
    c(0xBAC1, None, "HANGUL SYLLABLE MOT", 0x31, "Hangul"),
    c(0xBAC2, None, "HANGUL SYLLABLE MOP", 0x31, "Hangul"),
    c(0xBAC3, None, "HANGUL SYLLABLE MOH", 0x31, "Hangul"),
    c(0xBAC4, None, "HANGUL SYLLABLE MWA", 0x31, "Hangul"),
    c(0xBAC5, None, "HANGUL SYLLABLE MWAG", 0x31, "Hangul"),
    c(0xBAC6, None, "HANGUL SYLLABLE MWAGG", 0x31, "Hangul"),
    c(0xBAC7, None, "HANGUL SYLLABLE MWAGS", 0x31, "Hangul"),
    c(0xBAC8, None, "HANGUL SYLLABLE MWAN", 0x31, "Hangul"),
    c(0xBAC9, None, "HANGUL SYLLABLE MWANJ", 0x31, "Hangul"),
    c(0xBACA, None, "HANGUL SYLLABLE MWANH", 0x31, "Hangul"),
    c(0xBACB, None, "HANGUL SYLLABLE MWAD", 0x31, "Hangul"),
    c(0xBACC, None, "HANGUL SYLLABLE MWAL", 0x31, "Hangul"),
    c(0xBACD, None, "HANGUL SYLLABLE MWALG", 0x31, "Hangul"),
    c(0xBACE, None, "HANGUL SYLLABLE MWALM", 0x31, "Hangul"),
    c(0xBACF, None, "HANGUL SYLLABLE MWALB", 0x31, "Hangul"),
    c(0xBAD0, None, "HANGUL SYLLABLE MWALS", 0x31, "Hangul"),
    c(0xBAD1, None, "HANGUL SYLLABLE MWALT", 0x31, "Hangul"),
    c(0xBAD2, None, "HANGUL SYLLABLE MWALP", 0x31, "Hangul"),
    c(0xBAD3, None, "HANGUL SYLLABLE MWALH", 0x31, "Hangul"),
    c(0xBAD4, None, "HANGUL SYLLABLE MWAM", 0x31, "Hangul"),
    c(0xBAD5, None, "HANGUL SYLLABLE MWAB", 0x31, "Hangul"),
    c(0xBAD6, None, "HANGUL SYLLABLE MWABS", 0x31, "Hangul"),
    c(0xBAD7, None, "HANGUL SYLLABLE MWAS", 0x31, "Hangul"),
    c(0xBAD8, None, "HANGUL SYLLABLE MWASS", 0x31, "Hangul"),
    c(0xBAD9, None, "HANGUL SYLLABLE MWANG", 0x31, "Hangul"),
    c(0xBADA, None, "HANGUL SYLLABLE MWAJ", 0x31, "Hangul"),
    c(0xBADB, None, "HANGUL SYLLABLE MWAC", 0x31, "Hangul"),
    c(0xBADC, None, "HANGUL SYLLABLE MWAK", 0x31, "Hangul"),
    c(0xBADD, None, "HANGUL SYLLABLE MWAT", 0x31, "Hangul"),
    c(0xBADE, None, "HANGUL SYLLABLE MWAP", 0x31, "Hangul"),
    c(0xBADF, None, "HANGUL SYLLABLE MWAH", 0x31, "Hangul"),
    c(0xBAE0, None, "HANGUL SYLLABLE MWAE", 0x31, "Hangul"),
    c(0xBAE1, None, "HANGUL SYLLABLE MWAEG", 0x31, "Hangul"),
    c(0xBAE2, None, "HANGUL SYLLABLE MWAEGG", 0x31, "Hangul"),
    c(0xBAE3, None, "HANGUL SYLLABLE MWAEGS", 0x31, "Hangul"),
    c(0xBAE4, None, "HANGUL SYLLABLE MWAEN", 0x31, "Hangul"),
    c(0xBAE5, None, "HANGUL SYLLABLE MWAENJ", 0x31, "Hangul"),
    c(0xBAE6, None, "HANGUL SYLLABLE MWAENH", 0x31, "Hangul"),
    c(0xBAE7, None, "HANGUL SYLLABLE MWAED", 0x31, "Hangul"),
    c(0xBAE8, None, "HANGUL SYLLABLE MWAEL", 0x31, "Hangul"),
    c(0xBAE9, None, "HANGUL SYLLABLE MWAELG", 0x31, "Hangul"),
    c(0xBAEA, None, "HANGUL SYLLABLE MWAELM", 0x31, "Hangul"),
    c(0xBAEB, None, "HANGUL SYLLABLE MWAELB", 0x31, "Hangul"),
    c(0xBAEC, None, "HANGUL SYLLABLE MWAELS", 0x31, "Hangul"),
    c(0xBAED, None, "HANGUL SYLLABLE MWAELT", 0x31, "Hangul"),
    c(0xBAEE, None, "HANGUL SYLLABLE MWAELP", 0x31, "Hangul"),
    c(0xBAEF, None, "HANGUL SYLLABLE MWAELH", 0x31, "Hangul"),
    c(0xBAF0, None, "HANGUL SYLLABLE MWAEM", 0x31, "Hangul"),
    c(0xBAF1, None, "HANGUL SYLLABLE MWAEB", 0x31, "Hangul"),
    c(0xBAF2, None, "HANGUL SYLLABLE MWAEBS", 0x31, "Hangul"),
    c(0xBAF3, None, "HANGUL SYLLABLE MWAES", 0x31, "Hangul"),
    c(0xBAF4, None, "HANGUL SYLLABLE MWAESS", 0x31, "Hangul"),
    c(0xBAF5, None, "HANGUL SYLLABLE MWAENG", 0x31, "Hangul"),
    c(0xBAF6, None, "HANGUL SYLLABLE MWAEJ", 0x31, "Hangul"),
    c(0xBAF7, None, "HANGUL SYLLABLE MWAEC", 0x31, "Hangul"),
    c(0xBAF8, None, "HANGUL SYLLABLE MWAEK", 0x31, "Hangul"),
    c(0xBAF9, None, "HANGUL SYLLABLE MWAET", 0x31, "Hangul"),
    c(0xBAFA, None, "HANGUL SYLLABLE MWAEP", 0x31, "Hangul"),
    c(0xBAFB, None, "HANGUL SYLLABLE MWAEH", 0x31, "Hangul"),
    c(0xBAFC, None, "HANGUL SYLLABLE MOE", 0x31, "Hangul"),
    c(0xBAFD, None, "HANGUL SYLLABLE MOEG", 0x31, "Hangul"),
    c(0xBAFE, None, "HANGUL SYLLABLE MOEGG", 0x31, "Hangul"),
    c(0xBAFF, None, "HANGUL SYLLABLE MOEGS", 0x31, "Hangul"),
    c(0xBB00, None, "HANGUL SYLLABLE MOEN", 0x31, "Hangul"),
    c(0xBB01, None, "HANGUL SYLLABLE MOENJ", 0x31, "Hangul"),
    c(0xBB02, None, "HANGUL SYLLABLE MOENH", 0x31, "Hangul"),
    c(0xBB03, None, "HANGUL SYLLABLE MOED", 0x31, "Hangul"),
    c(0xBB04, None, "HANGUL SYLLABLE MOEL", 0x31, "Hangul"),
    c(0xBB05, None, "HANGUL SYLLABLE MOELG", 0x31, "Hangul"),
    c(0xBB06, None, "HANGUL SYLLABLE MOELM", 0x31, "Hangul"),
    c(0xBB07, None, "HANGUL SYLLABLE MOELB", 0x31, "Hangul"),
    c(0xBB08, None, "HANGUL SYLLABLE MOELS", 0x31, "Hangul"),
    c(0xBB09, None, "HANGUL SYLLABLE MOELT", 0x31, "Hangul"),
    c(0xBB0A, None, "HANGUL SYLLABLE MOELP", 0x31, "Hangul"),
    c(0xBB0B, None, "HANGUL SYLLABLE MOELH", 0x31, "Hangul"),
    c(0xBB0C, None, "HANGUL SYLLABLE MOEM", 0x31, "Hangul"),
    c(0xBB0D, None, "HANGUL SYLLABLE MOEB", 0x31, "Hangul"),
    c(0xBB0E, None, "HANGUL SYLLABLE MOEBS", 0x31, "Hangul"),
    c(0xBB0F, None, "HANGUL SYLLABLE MOES", 0x31, "Hangul"),
    c(0xBB10, None, "HANGUL SYLLABLE MOESS", 0x31, "Hangul"),
    c(0xBB11, None, "HANGUL SYLLABLE MOENG", 0x31, "Hangul"),
    c(0xBB12, None, "HANGUL SYLLABLE MOEJ", 0x31, "Hangul"),
    c(0xBB13, None, "HANGUL SYLLABLE MOEC", 0x31, "Hangul"),
    c(0xBB14, None, "HANGUL SYLLABLE MOEK", 0x31, "Hangul"),
    c(0xBB15, None, "HANGUL SYLLABLE MOET", 0x31, "Hangul"),
    c(0xBB16, None, "HANGUL SYLLABLE MOEP", 0x31, "Hangul"),
    c(0xBB17, None, "HANGUL SYLLABLE MOEH", 0x31, "Hangul"),
    c(0xBB18, None, "HANGUL SYLLABLE MYO", 0x31, "Hangul"),
    c(0xBB19, None, "HANGUL SYLLABLE MYOG", 0x31, "Hangul"),
    c(0xBB1A, None, "HANGUL SYLLABLE MYOGG", 0x31, "Hangul"),
    c(0xBB1B, None, "HANGUL SYLLABLE MYOGS", 0x31, "Hangul"),
    c(0xBB1C, None, "HANGUL SYLLABLE MYON", 0x31, "Hangul"),
    c(0xBB1D, None, "HANGUL SYLLABLE MYONJ", 0x31, "Hangul"),
    c(0xBB1E, None, "HANGUL SYLLABLE MYONH", 0x31, "Hangul"),
    c(0xBB1F, None, "HANGUL SYLLABLE MYOD", 0x31, "Hangul"),
    c(0xBB20, None, "HANGUL SYLLABLE MYOL", 0x31, "Hangul"),
    c(0xBB21, None, "HANGUL SYLLABLE MYOLG", 0x31, "Hangul"),
    c(0xBB22, None, "HANGUL SYLLABLE MYOLM", 0x31, "Hangul"),
    c(0xBB23, None, "HANGUL SYLLABLE MYOLB", 0x31, "Hangul"),
    c(0xBB24, None, "HANGUL SYLLABLE MYOLS", 0x31, "Hangul"),
    c(0xBB25, None, "HANGUL SYLLABLE MYOLT", 0x31, "Hangul"),
    c(0xBB26, None, "HANGUL SYLLABLE MYOLP", 0x31, "Hangul"),
    c(0xBB27, None, "HANGUL SYLLABLE MYOLH", 0x31, "Hangul"),
    c(0xBB28, None, "HANGUL SYLLABLE MYOM", 0x31, "Hangul"),
    c(0xBB29, None, "HANGUL SYLLABLE MYOB", 0x31, "Hangul"),
    c(0xBB2A, None, "HANGUL SYLLABLE MYOBS", 0x31, "Hangul"),
    c(0xBB2B, None, "HANGUL SYLLABLE MYOS", 0x31, "Hangul"),
    c(0xBB2C, None, "HANGUL SYLLABLE MYOSS", 0x31, "Hangul"),
    c(0xBB2D, None, "HANGUL SYLLABLE MYONG", 0x31, "Hangul"),
    c(0xBB2E, None, "HANGUL SYLLABLE MYOJ", 0x31, "Hangul"),
    c(0xBB2F, None, "HANGUL SYLLABLE MYOC", 0x31, "Hangul"),
    c(0xBB30, None, "HANGUL SYLLABLE MYOK", 0x31, "Hangul"),
    c(0xBB31, None, "HANGUL SYLLABLE MYOT", 0x31, "Hangul"),
    c(0xBB32, None, "HANGUL SYLLABLE MYOP", 0x31, "Hangul"),
    c(0xBB33, None, "HANGUL SYLLABLE MYOH", 0x31, "Hangul"),
    c(0xBB34, None, "HANGUL SYLLABLE MU", 0x31, "Hangul"),
    c(0xBB35, None, "HANGUL SYLLABLE MUG", 0x31, "Hangul"),
    c(0xBB36, None, "HANGUL SYLLABLE MUGG", 0x31, "Hangul"),
    c(0xBB37, None, "HANGUL SYLLABLE MUGS", 0x31, "Hangul"),
    c(0xBB38, None, "HANGUL SYLLABLE MUN", 0x31, "Hangul"),
    c(0xBB39, None, "HANGUL SYLLABLE MUNJ", 0x31, "Hangul"),
    c(0xBB3A, None, "HANGUL SYLLABLE MUNH", 0x31, "Hangul"),
    c(0xBB3B, None, "HANGUL SYLLABLE MUD", 0x31, "Hangul"),
    c(0xBB3C, None, "HANGUL SYLLABLE MUL", 0x31, "Hangul"),
    c(0xBB3D, None, "HANGUL SYLLABLE MULG", 0x31, "Hangul"),
    c(0xBB3E, None, "HANGUL SYLLABLE MULM", 0x31, "Hangul"),
    c(0xBB3F, None, "HANGUL SYLLABLE MULB", 0x31, "Hangul"),
    c(0xBB40, None, "HANGUL SYLLABLE MULS", 0x31, "Hangul"),
    c(0xBB41, None, "HANGUL SYLLABLE MULT", 0x31, "Hangul"),
    c(0xBB42, None, "HANGUL SYLLABLE MULP", 0x31, "Hangul"),
    c(0xBB43, None, "HANGUL SYLLABLE MULH", 0x31, "Hangul"),
    c(0xBB44, None, "HANGUL SYLLABLE MUM", 0x31, "Hangul"),
    c(0xBB45, None, "HANGUL SYLLABLE MUB", 0x31, "Hangul"),
    c(0xBB46, None, "HANGUL SYLLABLE MUBS", 0x31, "Hangul"),
    c(0xBB47, None, "HANGUL SYLLABLE MUS", 0x31, "Hangul"),
    c(0xBB48, None, "HANGUL SYLLABLE MUSS", 0x31, "Hangul"),
    c(0xBB49, None, "HANGUL SYLLABLE MUNG", 0x31, "Hangul"),
    c(0xBB4A, None, "HANGUL SYLLABLE MUJ", 0x31, "Hangul"),
    c(0xBB4B, None, "HANGUL SYLLABLE MUC", 0x31, "Hangul"),
    c(0xBB4C, None, "HANGUL SYLLABLE MUK", 0x31, "Hangul"),
    c(0xBB4D, None, "HANGUL SYLLABLE MUT", 0x31, "Hangul"),
    c(0xBB4E, None, "HANGUL SYLLABLE MUP", 0x31, "Hangul"),
    c(0xBB4F, None, "HANGUL SYLLABLE MUH", 0x31, "Hangul"),
    c(0xBB50, None, "HANGUL SYLLABLE MWEO", 0x31, "Hangul"),
    c(0xBB51, None, "HANGUL SYLLABLE MWEOG", 0x31, "Hangul"),
    c(0xBB52, None, "HANGUL SYLLABLE MWEOGG", 0x31, "Hangul"),
    c(0xBB53, None, "HANGUL SYLLABLE MWEOGS", 0x31, "Hangul"),
    c(0xBB54, None, "HANGUL SYLLABLE MWEON", 0x31, "Hangul"),
    c(0xBB55, None, "HANGUL SYLLABLE MWEONJ", 0x31, "Hangul"),
    c(0xBB56, None, "HANGUL SYLLABLE MWEONH", 0x31, "Hangul"),
    c(0xBB57, None, "HANGUL SYLLABLE MWEOD", 0x31, "Hangul"),
    c(0xBB58, None, "HANGUL SYLLABLE MWEOL", 0x31, "Hangul"),
    c(0xBB59, None, "HANGUL SYLLABLE MWEOLG", 0x31, "Hangul"),
    c(0xBB5A, None, "HANGUL SYLLABLE MWEOLM", 0x31, "Hangul"),
    c(0xBB5B, None, "HANGUL SYLLABLE MWEOLB", 0x31, "Hangul"),
    c(0xBB5C, None, "HANGUL SYLLABLE MWEOLS", 0x31, "Hangul"),
    c(0xBB5D, None, "HANGUL SYLLABLE MWEOLT", 0x31, "Hangul"),
    c(0xBB5E, None, "HANGUL SYLLABLE MWEOLP", 0x31, "Hangul"),
    c(0xBB5F, None, "HANGUL SYLLABLE MWEOLH", 0x31, "Hangul"),
    c(0xBB60, None, "HANGUL SYLLABLE MWEOM", 0x31, "Hangul"),
    c(0xBB61, None, "HANGUL SYLLABLE MWEOB", 0x31, "Hangul"),
    c(0xBB62, None, "HANGUL SYLLABLE MWEOBS", 0x31, "Hangul"),
    c(0xBB63, None, "HANGUL SYLLABLE MWEOS", 0x31, "Hangul"),
    c(0xBB64, None, "HANGUL SYLLABLE MWEOSS", 0x31, "Hangul"),
    c(0xBB65, None, "HANGUL SYLLABLE MWEONG", 0x31, "Hangul"),
    c(0xBB66, None, "HANGUL SYLLABLE MWEOJ", 0x31, "Hangul"),
    c(0xBB67, None, "HANGUL SYLLABLE MWEOC", 0x31, "Hangul"),
    c(0xBB68, None, "HANGUL SYLLABLE MWEOK", 0x31, "Hangul"),
    c(0xBB69, None, "HANGUL SYLLABLE MWEOT", 0x31, "Hangul"),
    c(0xBB6A, None, "HANGUL SYLLABLE MWEOP", 0x31, "Hangul"),
    c(0xBB6B, None, "HANGUL SYLLABLE MWEOH", 0x31, "Hangul"),
    c(0xBB6C, None, "HANGUL SYLLABLE MWE", 0x31, "Hangul"),
    c(0xBB6D, None, "HANGUL SYLLABLE MWEG", 0x31, "Hangul"),
    c(0xBB6E, None, "HANGUL SYLLABLE MWEGG", 0x31, "Hangul"),
    c(0xBB6F, None, "HANGUL SYLLABLE MWEGS", 0x31, "Hangul"),
    c(0xBB70, None, "HANGUL SYLLABLE MWEN", 0x31, "Hangul"),
    c(0xBB71, None, "HANGUL SYLLABLE MWENJ", 0x31, "Hangul"),
    c(0xBB72, None, "HANGUL SYLLABLE MWENH", 0x31, "Hangul"),
    c(0xBB73, None, "HANGUL SYLLABLE MWED", 0x31, "Hangul"),
    c(0xBB74, None, "HANGUL SYLLABLE MWEL", 0x31, "Hangul"),
    c(0xBB75, None, "HANGUL SYLLABLE MWELG", 0x31, "Hangul"),
    c(0xBB76, None, "HANGUL SYLLABLE MWELM", 0x31, "Hangul"),
    c(0xBB77, None, "HANGUL SYLLABLE MWELB", 0x31, "Hangul"),
    c(0xBB78, None, "HANGUL SYLLABLE MWELS", 0x31, "Hangul"),
    c(0xBB79, None, "HANGUL SYLLABLE MWELT", 0x31, "Hangul"),
    c(0xBB7A, None, "HANGUL SYLLABLE MWELP", 0x31, "Hangul"),
    c(0xBB7B, None, "HANGUL SYLLABLE MWELH", 0x31, "Hangul"),
    c(0xBB7C, None, "HANGUL SYLLABLE MWEM", 0x31, "Hangul"),
    c(0xBB7D, None, "HANGUL SYLLABLE MWEB", 0x31, "Hangul"),
    c(0xBB7E, None, "HANGUL SYLLABLE MWEBS", 0x31, "Hangul"),
    c(0xBB7F, None, "HANGUL SYLLABLE MWES", 0x31, "Hangul"),
    c(0xBB80, None, "HANGUL SYLLABLE MWESS", 0x31, "Hangul"),
    c(0xBB81, None, "HANGUL SYLLABLE MWENG", 0x31, "Hangul"),
    c(0xBB82, None, "HANGUL SYLLABLE MWEJ", 0x31, "Hangul"),
    c(0xBB83, None, "HANGUL SYLLABLE MWEC", 0x31, "Hangul"),
    c(0xBB84, None, "HANGUL SYLLABLE MWEK", 0x31, "Hangul"),
    c(0xBB85, None, "HANGUL SYLLABLE MWET", 0x31, "Hangul"),
    c(0xBB86, None, "HANGUL SYLLABLE MWEP", 0x31, "Hangul"),
    c(0xBB87, None, "HANGUL SYLLABLE MWEH", 0x31, "Hangul"),
    c(0xBB88, None, "HANGUL SYLLABLE MWI", 0x31, "Hangul"),
    c(0xBB89, None, "HANGUL SYLLABLE MWIG", 0x31, "Hangul"),
    c(0xBB8A, None, "HANGUL SYLLABLE MWIGG", 0x31, "Hangul"),
    c(0xBB8B, None, "HANGUL SYLLABLE MWIGS", 0x31, "Hangul"),
    c(0xBB8C, None, "HANGUL SYLLABLE MWIN", 0x31, "Hangul"),
    c(0xBB8D, None, "HANGUL SYLLABLE MWINJ", 0x31, "Hangul"),
    c(0xBB8E, None, "HANGUL SYLLABLE MWINH", 0x31, "Hangul"),
    c(0xBB8F, None, "HANGUL SYLLABLE MWID", 0x31, "Hangul"),
    c(0xBB90, None, "HANGUL SYLLABLE MWIL", 0x31, "Hangul"),
    c(0xBB91, None, "HANGUL SYLLABLE MWILG", 0x31, "Hangul"),
    c(0xBB92, None, "HANGUL SYLLABLE MWILM", 0x31, "Hangul"),
    c(0xBB93, None, "HANGUL SYLLABLE MWILB", 0x31, "Hangul"),
    c(0xBB94, None, "HANGUL SYLLABLE MWILS", 0x31, "Hangul"),
    c(0xBB95, None, "HANGUL SYLLABLE MWILT", 0x31, "Hangul"),
    c(0xBB96, None, "HANGUL SYLLABLE MWILP", 0x31, "Hangul"),
    c(0xBB97, None, "HANGUL SYLLABLE MWILH", 0x31, "Hangul"),
    c(0xBB98, None, "HANGUL SYLLABLE MWIM", 0x31, "Hangul"),
    c(0xBB99, None, "HANGUL SYLLABLE MWIB", 0x31, "Hangul"),
    c(0xBB9A, None, "HANGUL SYLLABLE MWIBS", 0x31, "Hangul"),
    c(0xBB9B, None, "HANGUL SYLLABLE MWIS", 0x31, "Hangul"),
    c(0xBB9C, None, "HANGUL SYLLABLE MWISS", 0x31, "Hangul"),
    c(0xBB9D, None, "HANGUL SYLLABLE MWING", 0x31, "Hangul"),
    c(0xBB9E, None, "HANGUL SYLLABLE MWIJ", 0x31, "Hangul"),
    c(0xBB9F, None, "HANGUL SYLLABLE MWIC", 0x31, "Hangul"),
    c(0xBBA0, None, "HANGUL SYLLABLE MWIK", 0x31, "Hangul"),
    c(0xBBA1, None, "HANGUL SYLLABLE MWIT", 0x31, "Hangul"),
    c(0xBBA2, None, "HANGUL SYLLABLE MWIP", 0x31, "Hangul"),
    c(0xBBA3, None, "HANGUL SYLLABLE MWIH", 0x31, "Hangul"),
    c(0xBBA4, None, "HANGUL SYLLABLE MYU", 0x31, "Hangul"),
    c(0xBBA5, None, "HANGUL SYLLABLE MYUG", 0x31, "Hangul"),
    c(0xBBA6, None, "HANGUL SYLLABLE MYUGG", 0x31, "Hangul"),
    c(0xBBA7, None, "HANGUL SYLLABLE MYUGS", 0x31, "Hangul"),
    c(0xBBA8, None, "HANGUL SYLLABLE MYUN", 0x31, "Hangul"),
    c(0xBBA9, None, "HANGUL SYLLABLE MYUNJ", 0x31, "Hangul"),
    c(0xBBAA, None, "HANGUL SYLLABLE MYUNH", 0x31, "Hangul"),
    c(0xBBAB, None, "HANGUL SYLLABLE MYUD", 0x31, "Hangul"),
    c(0xBBAC, None, "HANGUL SYLLABLE MYUL", 0x31, "Hangul"),
    c(0xBBAD, None, "HANGUL SYLLABLE MYULG", 0x31, "Hangul"),
    c(0xBBAE, None, "HANGUL SYLLABLE MYULM", 0x31, "Hangul"),
    c(0xBBAF, None, "HANGUL SYLLABLE MYULB", 0x31, "Hangul"),
    c(0xBBB0, None, "HANGUL SYLLABLE MYULS", 0x31, "Hangul"),
    c(0xBBB1, None, "HANGUL SYLLABLE MYULT", 0x31, "Hangul"),
    c(0xBBB2, None, "HANGUL SYLLABLE MYULP", 0x31, "Hangul"),
    c(0xBBB3, None, "HANGUL SYLLABLE MYULH", 0x31, "Hangul"),
    c(0xBBB4, None, "HANGUL SYLLABLE MYUM", 0x31, "Hangul"),
    c(0xBBB5, None, "HANGUL SYLLABLE MYUB", 0x31, "Hangul"),
    c(0xBBB6, None, "HANGUL SYLLABLE MYUBS", 0x31, "Hangul"),
    c(0xBBB7, None, "HANGUL SYLLABLE MYUS", 0x31, "Hangul"),
    c(0xBBB8, None, "HANGUL SYLLABLE MYUSS", 0x31, "Hangul"),
    c(0xBBB9, None, "HANGUL SYLLABLE MYUNG", 0x31, "Hangul"),
    c(0xBBBA, None, "HANGUL SYLLABLE MYUJ", 0x31, "Hangul"),
    c(0xBBBB, None, "HANGUL SYLLABLE MYUC", 0x31, "Hangul"),
    c(0xBBBC, None, "HANGUL SYLLABLE MYUK", 0x31, "Hangul"),
    c(0xBBBD, None, "HANGUL SYLLABLE MYUT", 0x31, "Hangul"),
    c(0xBBBE, None, "HANGUL SYLLABLE MYUP", 0x31, "Hangul"),
    c(0xBBBF, None, "HANGUL SYLLABLE MYUH", 0x31, "Hangul"),
    c(0xBBC0, None, "HANGUL SYLLABLE MEU", 0x31, "Hangul"),
    c(0xBBC1, None, "HANGUL SYLLABLE MEUG", 0x31, "Hangul"),
    c(0xBBC2, None, "HANGUL SYLLABLE MEUGG", 0x31, "Hangul"),
    c(0xBBC3, None, "HANGUL SYLLABLE MEUGS", 0x31, "Hangul"),
    c(0xBBC4, None, "HANGUL SYLLABLE MEUN", 0x31, "Hangul"),
    c(0xBBC5, None, "HANGUL SYLLABLE MEUNJ", 0x31, "Hangul"),
    c(0xBBC6, None, "HANGUL SYLLABLE MEUNH", 0x31, "Hangul"),
    c(0xBBC7, None, "HANGUL SYLLABLE MEUD", 0x31, "Hangul"),
    c(0xBBC8, None, "HANGUL SYLLABLE MEUL", 0x31, "Hangul"),
    c(0xBBC9, None, "HANGUL SYLLABLE MEULG", 0x31, "Hangul"),
    c(0xBBCA, None, "HANGUL SYLLABLE MEULM", 0x31, "Hangul"),
    c(0xBBCB, None, "HANGUL SYLLABLE MEULB", 0x31, "Hangul"),
    c(0xBBCC, None, "HANGUL SYLLABLE MEULS", 0x31, "Hangul"),
    c(0xBBCD, None, "HANGUL SYLLABLE MEULT", 0x31, "Hangul"),
    c(0xBBCE, None, "HANGUL SYLLABLE MEULP", 0x31, "Hangul"),
    c(0xBBCF, None, "HANGUL SYLLABLE MEULH", 0x31, "Hangul"),
    c(0xBBD0, None, "HANGUL SYLLABLE MEUM", 0x31, "Hangul"),
    c(0xBBD1, None, "HANGUL SYLLABLE MEUB", 0x31, "Hangul"),
    c(0xBBD2, None, "HANGUL SYLLABLE MEUBS", 0x31, "Hangul"),
    c(0xBBD3, None, "HANGUL SYLLABLE MEUS", 0x31, "Hangul"),
    c(0xBBD4, None, "HANGUL SYLLABLE MEUSS", 0x31, "Hangul"),
    c(0xBBD5, None, "HANGUL SYLLABLE MEUNG", 0x31, "Hangul"),
    c(0xBBD6, None, "HANGUL SYLLABLE MEUJ", 0x31, "Hangul"),
    c(0xBBD7, None, "HANGUL SYLLABLE MEUC", 0x31, "Hangul"),
    c(0xBBD8, None, "HANGUL SYLLABLE MEUK", 0x31, "Hangul"),
    c(0xBBD9, None, "HANGUL SYLLABLE MEUT", 0x31, "Hangul"),
    c(0xBBDA, None, "HANGUL SYLLABLE MEUP", 0x31, "Hangul"),
    c(0xBBDB, None, "HANGUL SYLLABLE MEUH", 0x31, "Hangul"),
    c(0xBBDC, None, "HANGUL SYLLABLE MYI", 0x31, "Hangul"),
    c(0xBBDD, None, "HANGUL SYLLABLE MYIG", 0x31, "Hangul"),
    c(0xBBDE, None, "HANGUL SYLLABLE MYIGG", 0x31, "Hangul"),
    c(0xBBDF, None, "HANGUL SYLLABLE MYIGS", 0x31, "Hangul"),
    c(0xBBE0, None, "HANGUL SYLLABLE MYIN", 0x31, "Hangul"),
    c(0xBBE1, None, "HANGUL SYLLABLE MYINJ", 0x31, "Hangul"),
    c(0xBBE2, None, "HANGUL SYLLABLE MYINH", 0x31, "Hangul"),
    c(0xBBE3, None, "HANGUL SYLLABLE MYID", 0x31, "Hangul"),
    c(0xBBE4, None, "HANGUL SYLLABLE MYIL", 0x31, "Hangul"),
    c(0xBBE5, None, "HANGUL SYLLABLE MYILG", 0x31, "Hangul"),
    c(0xBBE6, None, "HANGUL SYLLABLE MYILM", 0x31, "Hangul"),
    c(0xBBE7, None, "HANGUL SYLLABLE MYILB", 0x31, "Hangul"),
    c(0xBBE8, None, "HANGUL SYLLABLE MYILS", 0x31, "Hangul"),
    c(0xBBE9, None, "HANGUL SYLLABLE MYILT", 0x31, "Hangul"),
    c(0xBBEA, None, "HANGUL SYLLABLE MYILP", 0x31, "Hangul"),
    c(0xBBEB, None, "HANGUL SYLLABLE MYILH", 0x31, "Hangul"),
    c(0xBBEC, None, "HANGUL SYLLABLE MYIM", 0x31, "Hangul"),
    c(0xBBED, None, "HANGUL SYLLABLE MYIB", 0x31, "Hangul"),
    c(0xBBEE, None, "HANGUL SYLLABLE MYIBS", 0x31, "Hangul"),
    c(0xBBEF, None, "HANGUL SYLLABLE MYIS", 0x31, "Hangul"),
    c(0xBBF0, None, "HANGUL SYLLABLE MYISS", 0x31, "Hangul"),
    c(0xBBF1, None, "HANGUL SYLLABLE MYING", 0x31, "Hangul"),
    c(0xBBF2, None, "HANGUL SYLLABLE MYIJ", 0x31, "Hangul"),
    c(0xBBF3, None, "HANGUL SYLLABLE MYIC", 0x31, "Hangul"),
    c(0xBBF4, None, "HANGUL SYLLABLE MYIK", 0x31, "Hangul"),
    c(0xBBF5, None, "HANGUL SYLLABLE MYIT", 0x31, "Hangul"),
    c(0xBBF6, None, "HANGUL SYLLABLE MYIP", 0x31, "Hangul"),
    c(0xBBF7, None, "HANGUL SYLLABLE MYIH", 0x31, "Hangul"),
    c(0xBBF8, None, "HANGUL SYLLABLE MI", 0x31, "Hangul"),
    c(0xBBF9, None, "HANGUL SYLLABLE MIG", 0x31, "Hangul"),
    c(0xBBFA, None, "HANGUL SYLLABLE MIGG", 0x31, "Hangul"),
    c(0xBBFB, None, "HANGUL SYLLABLE MIGS", 0x31, "Hangul"),
    c(0xBBFC, None, "HANGUL SYLLABLE MIN", 0x31, "Hangul"),
    c(0xBBFD, None, "HANGUL SYLLABLE MINJ", 0x31, "Hangul"),
    c(0xBBFE, None, "HANGUL SYLLABLE MINH", 0x31, "Hangul"),
    c(0xBBFF, None, "HANGUL SYLLABLE MID", 0x31, "Hangul"),
    c(0xBC00, None, "HANGUL SYLLABLE MIL", 0x31, "Hangul"),
    c(0xBC01, None, "HANGUL SYLLABLE MILG", 0x31, "Hangul"),
    c(0xBC02, None, "HANGUL SYLLABLE MILM", 0x31, "Hangul"),
    c(0xBC03, None, "HANGUL SYLLABLE MILB", 0x31, "Hangul"),
    c(0xBC04, None, "HANGUL SYLLABLE MILS", 0x31, "Hangul"),
    c(0xBC05, None, "HANGUL SYLLABLE MILT", 0x31, "Hangul"),
    c(0xBC06, None, "HANGUL SYLLABLE MILP", 0x31, "Hangul"),
    c(0xBC07, None, "HANGUL SYLLABLE MILH", 0x31, "Hangul"),
    c(0xBC08, None, "HANGUL SYLLABLE MIM", 0x31, "Hangul"),
    c(0xBC09, None, "HANGUL SYLLABLE MIB", 0x31, "Hangul"),
    c(0xBC0A, None, "HANGUL SYLLABLE MIBS", 0x31, "Hangul"),
    c(0xBC0B, None, "HANGUL SYLLABLE MIS", 0x31, "Hangul"),
    c(0xBC0C, None, "HANGUL SYLLABLE MISS", 0x31, "Hangul"),
    c(0xBC0D, None, "HANGUL SYLLABLE MING", 0x31, "Hangul"),
    c(0xBC0E, None, "HANGUL SYLLABLE MIJ", 0x31, "Hangul"),
    c(0xBC0F, None, "HANGUL SYLLABLE MIC", 0x31, "Hangul"),
    c(0xBC10, None, "HANGUL SYLLABLE MIK", 0x31, "Hangul"),
    c(0xBC11, None, "HANGUL SYLLABLE MIT", 0x31, "Hangul"),
    c(0xBC12, None, "HANGUL SYLLABLE MIP", 0x31, "Hangul"),
    c(0xBC13, None, "HANGUL SYLLABLE MIH", 0x31, "Hangul"),
    c(0xBC14, None, "HANGUL SYLLABLE BA", 0x31, "Hangul"),
    c(0xBC15, None, "HANGUL SYLLABLE BAG", 0x31, "Hangul"),
    c(0xBC16, None, "HANGUL SYLLABLE BAGG", 0x31, "Hangul"),
    c(0xBC17, None, "HANGUL SYLLABLE BAGS", 0x31, "Hangul"),
    c(0xBC18, None, "HANGUL SYLLABLE BAN", 0x31, "Hangul"),
    c(0xBC19, None, "HANGUL SYLLABLE BANJ", 0x31, "Hangul"),
    c(0xBC1A, None, "HANGUL SYLLABLE BANH", 0x31, "Hangul"),
    c(0xBC1B, None, "HANGUL SYLLABLE BAD", 0x31, "Hangul"),
    c(0xBC1C, None, "HANGUL SYLLABLE BAL", 0x31, "Hangul"),
    c(0xBC1D, None, "HANGUL SYLLABLE BALG", 0x31, "Hangul"),
    c(0xBC1E, None, "HANGUL SYLLABLE BALM", 0x31, "Hangul"),
    c(0xBC1F, None, "HANGUL SYLLABLE BALB", 0x31, "Hangul"),
    c(0xBC20, None, "HANGUL SYLLABLE BALS", 0x31, "Hangul"),
    c(0xBC21, None, "HANGUL SYLLABLE BALT", 0x31, "Hangul"),
    c(0xBC22, None, "HANGUL SYLLABLE BALP", 0x31, "Hangul"),
    c(0xBC23, None, "HANGUL SYLLABLE BALH", 0x31, "Hangul"),
    c(0xBC24, None, "HANGUL SYLLABLE BAM", 0x31, "Hangul"),
    c(0xBC25, None, "HANGUL SYLLABLE BAB", 0x31, "Hangul"),
    c(0xBC26, None, "HANGUL SYLLABLE BABS", 0x31, "Hangul"),
    c(0xBC27, None, "HANGUL SYLLABLE BAS", 0x31, "Hangul"),
    c(0xBC28, None, "HANGUL SYLLABLE BASS", 0x31, "Hangul"),
    c(0xBC29, None, "HANGUL SYLLABLE BANG", 0x31, "Hangul"),
    c(0xBC2A, None, "HANGUL SYLLABLE BAJ", 0x31, "Hangul"),
    c(0xBC2B, None, "HANGUL SYLLABLE BAC", 0x31, "Hangul"),
    c(0xBC2C, None, "HANGUL SYLLABLE BAK", 0x31, "Hangul"),
    c(0xBC2D, None, "HANGUL SYLLABLE BAT", 0x31, "Hangul"),
    c(0xBC2E, None, "HANGUL SYLLABLE BAP", 0x31, "Hangul"),
    c(0xBC2F, None, "HANGUL SYLLABLE BAH", 0x31, "Hangul"),
    c(0xBC30, None, "HANGUL SYLLABLE BAE", 0x31, "Hangul"),
    c(0xBC31, None, "HANGUL SYLLABLE BAEG", 0x31, "Hangul"),
    c(0xBC32, None, "HANGUL SYLLABLE BAEGG", 0x31, "Hangul"),
    c(0xBC33, None, "HANGUL SYLLABLE BAEGS", 0x31, "Hangul"),
    c(0xBC34, None, "HANGUL SYLLABLE BAEN", 0x31, "Hangul"),
    c(0xBC35, None, "HANGUL SYLLABLE BAENJ", 0x31, "Hangul"),
    c(0xBC36, None, "HANGUL SYLLABLE BAENH", 0x31, "Hangul"),
    c(0xBC37, None, "HANGUL SYLLABLE BAED", 0x31, "Hangul"),
    c(0xBC38, None, "HANGUL SYLLABLE BAEL", 0x31, "Hangul"),
    c(0xBC39, None, "HANGUL SYLLABLE BAELG", 0x31, "Hangul"),
    c(0xBC3A, None, "HANGUL SYLLABLE BAELM", 0x31, "Hangul"),
    c(0xBC3B, None, "HANGUL SYLLABLE BAELB", 0x31, "Hangul"),
    c(0xBC3C, None, "HANGUL SYLLABLE BAELS", 0x31, "Hangul"),
    c(0xBC3D, None, "HANGUL SYLLABLE BAELT", 0x31, "Hangul"),
    c(0xBC3E, None, "HANGUL SYLLABLE BAELP", 0x31, "Hangul"),
    c(0xBC3F, None, "HANGUL SYLLABLE BAELH", 0x31, "Hangul"),
    c(0xBC40, None, "HANGUL SYLLABLE BAEM", 0x31, "Hangul"),
    c(0xBC41, None, "HANGUL SYLLABLE BAEB", 0x31, "Hangul"),
    c(0xBC42, None, "HANGUL SYLLABLE BAEBS", 0x31, "Hangul"),
    c(0xBC43, None, "HANGUL SYLLABLE BAES", 0x31, "Hangul"),
    c(0xBC44, None, "HANGUL SYLLABLE BAESS", 0x31, "Hangul"),
    c(0xBC45, None, "HANGUL SYLLABLE BAENG", 0x31, "Hangul"),
    c(0xBC46, None, "HANGUL SYLLABLE BAEJ", 0x31, "Hangul"),
    c(0xBC47, None, "HANGUL SYLLABLE BAEC", 0x31, "Hangul"),
    c(0xBC48, None, "HANGUL SYLLABLE BAEK", 0x31, "Hangul"),
    c(0xBC49, None, "HANGUL SYLLABLE BAET", 0x31, "Hangul"),
    c(0xBC4A, None, "HANGUL SYLLABLE BAEP", 0x31, "Hangul"),
    c(0xBC4B, None, "HANGUL SYLLABLE BAEH", 0x31, "Hangul"),
    c(0xBC4C, None, "HANGUL SYLLABLE BYA", 0x31, "Hangul"),
    c(0xBC4D, None, "HANGUL SYLLABLE BYAG", 0x31, "Hangul"),
    c(0xBC4E, None, "HANGUL SYLLABLE BYAGG", 0x31, "Hangul"),
    c(0xBC4F, None, "HANGUL SYLLABLE BYAGS", 0x31, "Hangul"),
    c(0xBC50, None, "HANGUL SYLLABLE BYAN", 0x31, "Hangul"),
    c(0xBC51, None, "HANGUL SYLLABLE BYANJ", 0x31, "Hangul"),
    c(0xBC52, None, "HANGUL SYLLABLE BYANH", 0x31, "Hangul"),
    c(0xBC53, None, "HANGUL SYLLABLE BYAD", 0x31, "Hangul"),
    c(0xBC54, None, "HANGUL SYLLABLE BYAL", 0x31, "Hangul"),
    c(0xBC55, None, "HANGUL SYLLABLE BYALG", 0x31, "Hangul"),
    c(0xBC56, None, "HANGUL SYLLABLE BYALM", 0x31, "Hangul"),
    c(0xBC57, None, "HANGUL SYLLABLE BYALB", 0x31, "Hangul"),
    c(0xBC58, None, "HANGUL SYLLABLE BYALS", 0x31, "Hangul"),
    c(0xBC59, None, "HANGUL SYLLABLE BYALT", 0x31, "Hangul"),
    c(0xBC5A, None, "HANGUL SYLLABLE BYALP", 0x31, "Hangul"),
    c(0xBC5B, None, "HANGUL SYLLABLE BYALH", 0x31, "Hangul"),
    c(0xBC5C, None, "HANGUL SYLLABLE BYAM", 0x31, "Hangul"),
    c(0xBC5D, None, "HANGUL SYLLABLE BYAB", 0x31, "Hangul"),
    c(0xBC5E, None, "HANGUL SYLLABLE BYABS", 0x31, "Hangul"),
    c(0xBC5F, None, "HANGUL SYLLABLE BYAS", 0x31, "Hangul"),
    c(0xBC60, None, "HANGUL SYLLABLE BYASS", 0x31, "Hangul"),
    c(0xBC61, None, "HANGUL SYLLABLE BYANG", 0x31, "Hangul"),
    c(0xBC62, None, "HANGUL SYLLABLE BYAJ", 0x31, "Hangul"),
    c(0xBC63, None, "HANGUL SYLLABLE BYAC", 0x31, "Hangul"),
    c(0xBC64, None, "HANGUL SYLLABLE BYAK", 0x31, "Hangul"),
    c(0xBC65, None, "HANGUL SYLLABLE BYAT", 0x31, "Hangul"),
    c(0xBC66, None, "HANGUL SYLLABLE BYAP", 0x31, "Hangul"),
    c(0xBC67, None, "HANGUL SYLLABLE BYAH", 0x31, "Hangul"),
    c(0xBC68, None, "HANGUL SYLLABLE BYAE", 0x31, "Hangul"),
    c(0xBC69, None, "HANGUL SYLLABLE BYAEG", 0x31, "Hangul"),
    c(0xBC6A, None, "HANGUL SYLLABLE BYAEGG", 0x31, "Hangul"),
    c(0xBC6B, None, "HANGUL SYLLABLE BYAEGS", 0x31, "Hangul"),
    c(0xBC6C, None, "HANGUL SYLLABLE BYAEN", 0x31, "Hangul"),
    c(0xBC6D, None, "HANGUL SYLLABLE BYAENJ", 0x31, "Hangul"),
    c(0xBC6E, None, "HANGUL SYLLABLE BYAENH", 0x31, "Hangul"),
    c(0xBC6F, None, "HANGUL SYLLABLE BYAED", 0x31, "Hangul"),
    c(0xBC70, None, "HANGUL SYLLABLE BYAEL", 0x31, "Hangul"),
    c(0xBC71, None, "HANGUL SYLLABLE BYAELG", 0x31, "Hangul"),
    c(0xBC72, None, "HANGUL SYLLABLE BYAELM", 0x31, "Hangul"),
    c(0xBC73, None, "HANGUL SYLLABLE BYAELB", 0x31, "Hangul"),
    c(0xBC74, None, "HANGUL SYLLABLE BYAELS", 0x31, "Hangul"),
    c(0xBC75, None, "HANGUL SYLLABLE BYAELT", 0x31, "Hangul"),
    c(0xBC76, None, "HANGUL SYLLABLE BYAELP", 0x31, "Hangul"),
    c(0xBC77, None, "HANGUL SYLLABLE BYAELH", 0x31, "Hangul"),
    c(0xBC78, None, "HANGUL SYLLABLE BYAEM", 0x31, "Hangul"),
    c(0xBC79, None, "HANGUL SYLLABLE BYAEB", 0x31, "Hangul"),
    c(0xBC7A, None, "HANGUL SYLLABLE BYAEBS", 0x31, "Hangul"),
    c(0xBC7B, None, "HANGUL SYLLABLE BYAES", 0x31, "Hangul"),
    c(0xBC7C, None, "HANGUL SYLLABLE BYAESS", 0x31, "Hangul"),
    c(0xBC7D, None, "HANGUL SYLLABLE BYAENG", 0x31, "Hangul"),
    c(0xBC7E, None, "HANGUL SYLLABLE BYAEJ", 0x31, "Hangul"),
    c(0xBC7F, None, "HANGUL SYLLABLE BYAEC", 0x31, "Hangul"),
    c(0xBC80, None, "HANGUL SYLLABLE BYAEK", 0x31, "Hangul"),
    c(0xBC81, None, "HANGUL SYLLABLE BYAET", 0x31, "Hangul"),
    c(0xBC82, None, "HANGUL SYLLABLE BYAEP", 0x31, "Hangul"),
    c(0xBC83, None, "HANGUL SYLLABLE BYAEH", 0x31, "Hangul"),
    c(0xBC84, None, "HANGUL SYLLABLE BEO", 0x31, "Hangul"),
    c(0xBC85, None, "HANGUL SYLLABLE BEOG", 0x31, "Hangul"),
    c(0xBC86, None, "HANGUL SYLLABLE BEOGG", 0x31, "Hangul"),
    c(0xBC87, None, "HANGUL SYLLABLE BEOGS", 0x31, "Hangul"),
    c(0xBC88, None, "HANGUL SYLLABLE BEON", 0x31, "Hangul"),
    c(0xBC89, None, "HANGUL SYLLABLE BEONJ", 0x31, "Hangul"),
    c(0xBC8A, None, "HANGUL SYLLABLE BEONH", 0x31, "Hangul"),
    c(0xBC8B, None, "HANGUL SYLLABLE BEOD", 0x31, "Hangul"),
    c(0xBC8C, None, "HANGUL SYLLABLE BEOL", 0x31, "Hangul"),
    c(0xBC8D, None, "HANGUL SYLLABLE BEOLG", 0x31, "Hangul"),
    c(0xBC8E, None, "HANGUL SYLLABLE BEOLM", 0x31, "Hangul"),
    c(0xBC8F, None, "HANGUL SYLLABLE BEOLB", 0x31, "Hangul"),
    c(0xBC90, None, "HANGUL SYLLABLE BEOLS", 0x31, "Hangul"),
    c(0xBC91, None, "HANGUL SYLLABLE BEOLT", 0x31, "Hangul"),
    c(0xBC92, None, "HANGUL SYLLABLE BEOLP", 0x31, "Hangul"),
    c(0xBC93, None, "HANGUL SYLLABLE BEOLH", 0x31, "Hangul"),
    c(0xBC94, None, "HANGUL SYLLABLE BEOM", 0x31, "Hangul"),
    c(0xBC95, None, "HANGUL SYLLABLE BEOB", 0x31, "Hangul"),
    c(0xBC96, None, "HANGUL SYLLABLE BEOBS", 0x31, "Hangul"),
    c(0xBC97, None, "HANGUL SYLLABLE BEOS", 0x31, "Hangul"),
    c(0xBC98, None, "HANGUL SYLLABLE BEOSS", 0x31, "Hangul"),
    c(0xBC99, None, "HANGUL SYLLABLE BEONG", 0x31, "Hangul"),
    c(0xBC9A, None, "HANGUL SYLLABLE BEOJ", 0x31, "Hangul"),
    c(0xBC9B, None, "HANGUL SYLLABLE BEOC", 0x31, "Hangul"),
    c(0xBC9C, None, "HANGUL SYLLABLE BEOK", 0x31, "Hangul"),
    c(0xBC9D, None, "HANGUL SYLLABLE BEOT", 0x31, "Hangul"),
    c(0xBC9E, None, "HANGUL SYLLABLE BEOP", 0x31, "Hangul"),
    c(0xBC9F, None, "HANGUL SYLLABLE BEOH", 0x31, "Hangul"),
    c(0xBCA0, None, "HANGUL SYLLABLE BE", 0x31, "Hangul"),
    c(0xBCA1, None, "HANGUL SYLLABLE BEG", 0x31, "Hangul"),
    c(0xBCA2, None, "HANGUL SYLLABLE BEGG", 0x31, "Hangul"),
    c(0xBCA3, None, "HANGUL SYLLABLE BEGS", 0x31, "Hangul"),
    c(0xBCA4, None, "HANGUL SYLLABLE BEN", 0x31, "Hangul"),
    c(0xBCA5, None, "HANGUL SYLLABLE BENJ", 0x31, "Hangul"),
    c(0xBCA6, None, "HANGUL SYLLABLE BENH", 0x31, "Hangul"),
    c(0xBCA7, None, "HANGUL SYLLABLE BED", 0x31, "Hangul"),
    c(0xBCA8, None, "HANGUL SYLLABLE BEL", 0x31, "Hangul"),
    c(0xBCA9, None, "HANGUL SYLLABLE BELG", 0x31, "Hangul"),
    c(0xBCAA, None, "HANGUL SYLLABLE BELM", 0x31, "Hangul"),
    c(0xBCAB, None, "HANGUL SYLLABLE BELB", 0x31, "Hangul"),
    c(0xBCAC, None, "HANGUL SYLLABLE BELS", 0x31, "Hangul"),
    c(0xBCAD, None, "HANGUL SYLLABLE BELT", 0x31, "Hangul"),
    c(0xBCAE, None, "HANGUL SYLLABLE BELP", 0x31, "Hangul"),
    c(0xBCAF, None, "HANGUL SYLLABLE BELH", 0x31, "Hangul"),
    c(0xBCB0, None, "HANGUL SYLLABLE BEM", 0x31, "Hangul"),
    c(0xBCB1, None, "HANGUL SYLLABLE BEB", 0x31, "Hangul"),
    c(0xBCB2, None, "HANGUL SYLLABLE BEBS", 0x31, "Hangul"),
    c(0xBCB3, None, "HANGUL SYLLABLE BES", 0x31, "Hangul"),
    c(0xBCB4, None, "HANGUL SYLLABLE BESS", 0x31, "Hangul"),
    c(0xBCB5, None, "HANGUL SYLLABLE BENG", 0x31, "Hangul"),
    c(0xBCB6, None, "HANGUL SYLLABLE BEJ", 0x31, "Hangul"),
    c(0xBCB7, None, "HANGUL SYLLABLE BEC", 0x31, "Hangul"),
    c(0xBCB8, None, "HANGUL SYLLABLE BEK", 0x31, "Hangul"),
    c(0xBCB9, None, "HANGUL SYLLABLE BET", 0x31, "Hangul"),
    c(0xBCBA, None, "HANGUL SYLLABLE BEP", 0x31, "Hangul"),
    c(0xBCBB, None, "HANGUL SYLLABLE BEH", 0x31, "Hangul"),
    c(0xBCBC, None, "HANGUL SYLLABLE BYEO", 0x31, "Hangul"),
    c(0xBCBD, None, "HANGUL SYLLABLE BYEOG", 0x31, "Hangul"),
    c(0xBCBE, None, "HANGUL SYLLABLE BYEOGG", 0x31, "Hangul"),
    c(0xBCBF, None, "HANGUL SYLLABLE BYEOGS", 0x31, "Hangul"),
    c(0xBCC0, None, "HANGUL SYLLABLE BYEON", 0x31, "Hangul"),
    c(0xBCC1, None, "HANGUL SYLLABLE BYEONJ", 0x31, "Hangul"),
    c(0xBCC2, None, "HANGUL SYLLABLE BYEONH", 0x31, "Hangul"),
    c(0xBCC3, None, "HANGUL SYLLABLE BYEOD", 0x31, "Hangul"),
    c(0xBCC4, None, "HANGUL SYLLABLE BYEOL", 0x31, "Hangul"),
    c(0xBCC5, None, "HANGUL SYLLABLE BYEOLG", 0x31, "Hangul"),
    c(0xBCC6, None, "HANGUL SYLLABLE BYEOLM", 0x31, "Hangul"),
    c(0xBCC7, None, "HANGUL SYLLABLE BYEOLB", 0x31, "Hangul"),
    c(0xBCC8, None, "HANGUL SYLLABLE BYEOLS", 0x31, "Hangul"),
    c(0xBCC9, None, "HANGUL SYLLABLE BYEOLT", 0x31, "Hangul"),
    c(0xBCCA, None, "HANGUL SYLLABLE BYEOLP", 0x31, "Hangul"),
    c(0xBCCB, None, "HANGUL SYLLABLE BYEOLH", 0x31, "Hangul"),
    c(0xBCCC, None, "HANGUL SYLLABLE BYEOM", 0x31, "Hangul"),
    c(0xBCCD, None, "HANGUL SYLLABLE BYEOB", 0x31, "Hangul"),
    c(0xBCCE, None, "HANGUL SYLLABLE BYEOBS", 0x31, "Hangul"),
    c(0xBCCF, None, "HANGUL SYLLABLE BYEOS", 0x31, "Hangul"),
    c(0xBCD0, None, "HANGUL SYLLABLE BYEOSS", 0x31, "Hangul"),
    c(0xBCD1, None, "HANGUL SYLLABLE BYEONG", 0x31, "Hangul"),
    c(0xBCD2, None, "HANGUL SYLLABLE BYEOJ", 0x31, "Hangul"),
    c(0xBCD3, None, "HANGUL SYLLABLE BYEOC", 0x31, "Hangul"),
    c(0xBCD4, None, "HANGUL SYLLABLE BYEOK", 0x31, "Hangul"),
    c(0xBCD5, None, "HANGUL SYLLABLE BYEOT", 0x31, "Hangul"),
    c(0xBCD6, None, "HANGUL SYLLABLE BYEOP", 0x31, "Hangul"),
    c(0xBCD7, None, "HANGUL SYLLABLE BYEOH", 0x31, "Hangul"),
    c(0xBCD8, None, "HANGUL SYLLABLE BYE", 0x31, "Hangul"),
    c(0xBCD9, None, "HANGUL SYLLABLE BYEG", 0x31, "Hangul"),
    c(0xBCDA, None, "HANGUL SYLLABLE BYEGG", 0x31, "Hangul"),
    c(0xBCDB, None, "HANGUL SYLLABLE BYEGS", 0x31, "Hangul"),
    c(0xBCDC, None, "HANGUL SYLLABLE BYEN", 0x31, "Hangul"),
    c(0xBCDD, None, "HANGUL SYLLABLE BYENJ", 0x31, "Hangul"),
    c(0xBCDE, None, "HANGUL SYLLABLE BYENH", 0x31, "Hangul"),
    c(0xBCDF, None, "HANGUL SYLLABLE BYED", 0x31, "Hangul"),
    c(0xBCE0, None, "HANGUL SYLLABLE BYEL", 0x31, "Hangul"),
    c(0xBCE1, None, "HANGUL SYLLABLE BYELG", 0x31, "Hangul"),
    c(0xBCE2, None, "HANGUL SYLLABLE BYELM", 0x31, "Hangul"),
    c(0xBCE3, None, "HANGUL SYLLABLE BYELB", 0x31, "Hangul"),
    c(0xBCE4, None, "HANGUL SYLLABLE BYELS", 0x31, "Hangul"),
    c(0xBCE5, None, "HANGUL SYLLABLE BYELT", 0x31, "Hangul"),
    c(0xBCE6, None, "HANGUL SYLLABLE BYELP", 0x31, "Hangul"),
    c(0xBCE7, None, "HANGUL SYLLABLE BYELH", 0x31, "Hangul"),
    c(0xBCE8, None, "HANGUL SYLLABLE BYEM", 0x31, "Hangul"),
    c(0xBCE9, None, "HANGUL SYLLABLE BYEB", 0x31, "Hangul"),
    c(0xBCEA, None, "HANGUL SYLLABLE BYEBS", 0x31, "Hangul"),
    c(0xBCEB, None, "HANGUL SYLLABLE BYES", 0x31, "Hangul"),
    c(0xBCEC, None, "HANGUL SYLLABLE BYESS", 0x31, "Hangul"),
    c(0xBCED, None, "HANGUL SYLLABLE BYENG", 0x31, "Hangul"),
    c(0xBCEE, None, "HANGUL SYLLABLE BYEJ", 0x31, "Hangul"),
    c(0xBCEF, None, "HANGUL SYLLABLE BYEC", 0x31, "Hangul"),
    c(0xBCF0, None, "HANGUL SYLLABLE BYEK", 0x31, "Hangul"),
    c(0xBCF1, None, "HANGUL SYLLABLE BYET", 0x31, "Hangul"),
    c(0xBCF2, None, "HANGUL SYLLABLE BYEP", 0x31, "Hangul"),
    c(0xBCF3, None, "HANGUL SYLLABLE BYEH", 0x31, "Hangul"),
    c(0xBCF4, None, "HANGUL SYLLABLE BO", 0x31, "Hangul"),
    c(0xBCF5, None, "HANGUL SYLLABLE BOG", 0x31, "Hangul"),
    c(0xBCF6, None, "HANGUL SYLLABLE BOGG", 0x31, "Hangul"),
    c(0xBCF7, None, "HANGUL SYLLABLE BOGS", 0x31, "Hangul"),
    c(0xBCF8, None, "HANGUL SYLLABLE BON", 0x31, "Hangul"),
    c(0xBCF9, None, "HANGUL SYLLABLE BONJ", 0x31, "Hangul"),
    c(0xBCFA, None, "HANGUL SYLLABLE BONH", 0x31, "Hangul"),
    c(0xBCFB, None, "HANGUL SYLLABLE BOD", 0x31, "Hangul"),
    c(0xBCFC, None, "HANGUL SYLLABLE BOL", 0x31, "Hangul"),
    c(0xBCFD, None, "HANGUL SYLLABLE BOLG", 0x31, "Hangul"),
    c(0xBCFE, None, "HANGUL SYLLABLE BOLM", 0x31, "Hangul"),
    c(0xBCFF, None, "HANGUL SYLLABLE BOLB", 0x31, "Hangul"),
    c(0xBD00, None, "HANGUL SYLLABLE BOLS", 0x31, "Hangul"),
    c(0xBD01, None, "HANGUL SYLLABLE BOLT", 0x31, "Hangul"),
    c(0xBD02, None, "HANGUL SYLLABLE BOLP", 0x31, "Hangul"),
    c(0xBD03, None, "HANGUL SYLLABLE BOLH", 0x31, "Hangul"),
    c(0xBD04, None, "HANGUL SYLLABLE BOM", 0x31, "Hangul"),
    c(0xBD05, None, "HANGUL SYLLABLE BOB", 0x31, "Hangul"),
    c(0xBD06, None, "HANGUL SYLLABLE BOBS", 0x31, "Hangul"),
    c(0xBD07, None, "HANGUL SYLLABLE BOS", 0x31, "Hangul"),
    c(0xBD08, None, "HANGUL SYLLABLE BOSS", 0x31, "Hangul"),
    c(0xBD09, None, "HANGUL SYLLABLE BONG", 0x31, "Hangul"),
    c(0xBD0A, None, "HANGUL SYLLABLE BOJ", 0x31, "Hangul"),
    c(0xBD0B, None, "HANGUL SYLLABLE BOC", 0x31, "Hangul"),
    c(0xBD0C, None, "HANGUL SYLLABLE BOK", 0x31, "Hangul"),
    c(0xBD0D, None, "HANGUL SYLLABLE BOT", 0x31, "Hangul"),
    c(0xBD0E, None, "HANGUL SYLLABLE BOP", 0x31, "Hangul"),
    c(0xBD0F, None, "HANGUL SYLLABLE BOH", 0x31, "Hangul"),
    c(0xBD10, None, "HANGUL SYLLABLE BWA", 0x31, "Hangul"),
    c(0xBD11, None, "HANGUL SYLLABLE BWAG", 0x31, "Hangul"),
    c(0xBD12, None, "HANGUL SYLLABLE BWAGG", 0x31, "Hangul"),
    c(0xBD13, None, "HANGUL SYLLABLE BWAGS", 0x31, "Hangul"),
    c(0xBD14, None, "HANGUL SYLLABLE BWAN", 0x31, "Hangul"),
    c(0xBD15, None, "HANGUL SYLLABLE BWANJ", 0x31, "Hangul"),
    c(0xBD16, None, "HANGUL SYLLABLE BWANH", 0x31, "Hangul"),
    c(0xBD17, None, "HANGUL SYLLABLE BWAD", 0x31, "Hangul"),
    c(0xBD18, None, "HANGUL SYLLABLE BWAL", 0x31, "Hangul"),
    c(0xBD19, None, "HANGUL SYLLABLE BWALG", 0x31, "Hangul"),
    c(0xBD1A, None, "HANGUL SYLLABLE BWALM", 0x31, "Hangul"),
    c(0xBD1B, None, "HANGUL SYLLABLE BWALB", 0x31, "Hangul"),
    c(0xBD1C, None, "HANGUL SYLLABLE BWALS", 0x31, "Hangul"),
    c(0xBD1D, None, "HANGUL SYLLABLE BWALT", 0x31, "Hangul"),
    c(0xBD1E, None, "HANGUL SYLLABLE BWALP", 0x31, "Hangul"),
    c(0xBD1F, None, "HANGUL SYLLABLE BWALH", 0x31, "Hangul"),
    c(0xBD20, None, "HANGUL SYLLABLE BWAM", 0x31, "Hangul"),
    c(0xBD21, None, "HANGUL SYLLABLE BWAB", 0x31, "Hangul"),
    c(0xBD22, None, "HANGUL SYLLABLE BWABS", 0x31, "Hangul"),
    c(0xBD23, None, "HANGUL SYLLABLE BWAS", 0x31, "Hangul"),
    c(0xBD24, None, "HANGUL SYLLABLE BWASS", 0x31, "Hangul"),
    c(0xBD25, None, "HANGUL SYLLABLE BWANG", 0x31, "Hangul"),
    c(0xBD26, None, "HANGUL SYLLABLE BWAJ", 0x31, "Hangul"),
    c(0xBD27, None, "HANGUL SYLLABLE BWAC", 0x31, "Hangul"),
    c(0xBD28, None, "HANGUL SYLLABLE BWAK", 0x31, "Hangul"),
    c(0xBD29, None, "HANGUL SYLLABLE BWAT", 0x31, "Hangul"),
    c(0xBD2A, None, "HANGUL SYLLABLE BWAP", 0x31, "Hangul"),
    c(0xBD2B, None, "HANGUL SYLLABLE BWAH", 0x31, "Hangul"),
    c(0xBD2C, None, "HANGUL SYLLABLE BWAE", 0x31, "Hangul"),
    c(0xBD2D, None, "HANGUL SYLLABLE BWAEG", 0x31, "Hangul"),
    c(0xBD2E, None, "HANGUL SYLLABLE BWAEGG", 0x31, "Hangul"),
    c(0xBD2F, None, "HANGUL SYLLABLE BWAEGS", 0x31, "Hangul"),
    c(0xBD30, None, "HANGUL SYLLABLE BWAEN", 0x31, "Hangul"),
    c(0xBD31, None, "HANGUL SYLLABLE BWAENJ", 0x31, "Hangul"),
    c(0xBD32, None, "HANGUL SYLLABLE BWAENH", 0x31, "Hangul"),
    c(0xBD33, None, "HANGUL SYLLABLE BWAED", 0x31, "Hangul"),
    c(0xBD34, None, "HANGUL SYLLABLE BWAEL", 0x31, "Hangul"),
    c(0xBD35, None, "HANGUL SYLLABLE BWAELG", 0x31, "Hangul"),
    c(0xBD36, None, "HANGUL SYLLABLE BWAELM", 0x31, "Hangul"),
    c(0xBD37, None, "HANGUL SYLLABLE BWAELB", 0x31, "Hangul"),
    c(0xBD38, None, "HANGUL SYLLABLE BWAELS", 0x31, "Hangul"),
    c(0xBD39, None, "HANGUL SYLLABLE BWAELT", 0x31, "Hangul"),
    c(0xBD3A, None, "HANGUL SYLLABLE BWAELP", 0x31, "Hangul"),
    c(0xBD3B, None, "HANGUL SYLLABLE BWAELH", 0x31, "Hangul"),
    c(0xBD3C, None, "HANGUL SYLLABLE BWAEM", 0x31, "Hangul"),
    c(0xBD3D, None, "HANGUL SYLLABLE BWAEB", 0x31, "Hangul"),
    c(0xBD3E, None, "HANGUL SYLLABLE BWAEBS", 0x31, "Hangul"),
    c(0xBD3F, None, "HANGUL SYLLABLE BWAES", 0x31, "Hangul"),
    c(0xBD40, None, "HANGUL SYLLABLE BWAESS", 0x31, "Hangul"),
    c(0xBD41, None, "HANGUL SYLLABLE BWAENG", 0x31, "Hangul"),
    c(0xBD42, None, "HANGUL SYLLABLE BWAEJ", 0x31, "Hangul"),
    c(0xBD43, None, "HANGUL SYLLABLE BWAEC", 0x31, "Hangul"),
    c(0xBD44, None, "HANGUL SYLLABLE BWAEK", 0x31, "Hangul"),
    c(0xBD45, None, "HANGUL SYLLABLE BWAET", 0x31, "Hangul"),
    c(0xBD46, None, "HANGUL SYLLABLE BWAEP", 0x31, "Hangul"),
    c(0xBD47, None, "HANGUL SYLLABLE BWAEH", 0x31, "Hangul"),
    c(0xBD48, None, "HANGUL SYLLABLE BOE", 0x31, "Hangul"),
    c(0xBD49, None, "HANGUL SYLLABLE BOEG", 0x31, "Hangul"),
    c(0xBD4A, None, "HANGUL SYLLABLE BOEGG", 0x31, "Hangul"),
    c(0xBD4B, None, "HANGUL SYLLABLE BOEGS", 0x31, "Hangul"),
    c(0xBD4C, None, "HANGUL SYLLABLE BOEN", 0x31, "Hangul"),
    c(0xBD4D, None, "HANGUL SYLLABLE BOENJ", 0x31, "Hangul"),
    c(0xBD4E, None, "HANGUL SYLLABLE BOENH", 0x31, "Hangul"),
    c(0xBD4F, None, "HANGUL SYLLABLE BOED", 0x31, "Hangul"),
    c(0xBD50, None, "HANGUL SYLLABLE BOEL", 0x31, "Hangul"),
    c(0xBD51, None, "HANGUL SYLLABLE BOELG", 0x31, "Hangul"),
    c(0xBD52, None, "HANGUL SYLLABLE BOELM", 0x31, "Hangul"),
    c(0xBD53, None, "HANGUL SYLLABLE BOELB", 0x31, "Hangul"),
    c(0xBD54, None, "HANGUL SYLLABLE BOELS", 0x31, "Hangul"),
    c(0xBD55, None, "HANGUL SYLLABLE BOELT", 0x31, "Hangul"),
    c(0xBD56, None, "HANGUL SYLLABLE BOELP", 0x31, "Hangul"),
    c(0xBD57, None, "HANGUL SYLLABLE BOELH", 0x31, "Hangul"),
    c(0xBD58, None, "HANGUL SYLLABLE BOEM", 0x31, "Hangul"),
    c(0xBD59, None, "HANGUL SYLLABLE BOEB", 0x31, "Hangul"),
    c(0xBD5A, None, "HANGUL SYLLABLE BOEBS", 0x31, "Hangul"),
    c(0xBD5B, None, "HANGUL SYLLABLE BOES", 0x31, "Hangul"),
    c(0xBD5C, None, "HANGUL SYLLABLE BOESS", 0x31, "Hangul"),
    c(0xBD5D, None, "HANGUL SYLLABLE BOENG", 0x31, "Hangul"),
    c(0xBD5E, None, "HANGUL SYLLABLE BOEJ", 0x31, "Hangul"),
    c(0xBD5F, None, "HANGUL SYLLABLE BOEC", 0x31, "Hangul"),
    c(0xBD60, None, "HANGUL SYLLABLE BOEK", 0x31, "Hangul"),
    c(0xBD61, None, "HANGUL SYLLABLE BOET", 0x31, "Hangul"),
    c(0xBD62, None, "HANGUL SYLLABLE BOEP", 0x31, "Hangul"),
    c(0xBD63, None, "HANGUL SYLLABLE BOEH", 0x31, "Hangul"),
    c(0xBD64, None, "HANGUL SYLLABLE BYO", 0x31, "Hangul"),
    c(0xBD65, None, "HANGUL SYLLABLE BYOG", 0x31, "Hangul"),
    c(0xBD66, None, "HANGUL SYLLABLE BYOGG", 0x31, "Hangul"),
    c(0xBD67, None, "HANGUL SYLLABLE BYOGS", 0x31, "Hangul"),
    c(0xBD68, None, "HANGUL SYLLABLE BYON", 0x31, "Hangul"),
    c(0xBD69, None, "HANGUL SYLLABLE BYONJ", 0x31, "Hangul"),
    c(0xBD6A, None, "HANGUL SYLLABLE BYONH", 0x31, "Hangul"),
    c(0xBD6B, None, "HANGUL SYLLABLE BYOD", 0x31, "Hangul"),
    c(0xBD6C, None, "HANGUL SYLLABLE BYOL", 0x31, "Hangul"),
    c(0xBD6D, None, "HANGUL SYLLABLE BYOLG", 0x31, "Hangul"),
    c(0xBD6E, None, "HANGUL SYLLABLE BYOLM", 0x31, "Hangul"),
    c(0xBD6F, None, "HANGUL SYLLABLE BYOLB", 0x31, "Hangul"),
    c(0xBD70, None, "HANGUL SYLLABLE BYOLS", 0x31, "Hangul"),
    c(0xBD71, None, "HANGUL SYLLABLE BYOLT", 0x31, "Hangul"),
    c(0xBD72, None, "HANGUL SYLLABLE BYOLP", 0x31, "Hangul"),
    c(0xBD73, None, "HANGUL SYLLABLE BYOLH", 0x31, "Hangul"),
    c(0xBD74, None, "HANGUL SYLLABLE BYOM", 0x31, "Hangul"),
    c(0xBD75, None, "HANGUL SYLLABLE BYOB", 0x31, "Hangul"),
    c(0xBD76, None, "HANGUL SYLLABLE BYOBS", 0x31, "Hangul"),
    c(0xBD77, None, "HANGUL SYLLABLE BYOS", 0x31, "Hangul"),
    c(0xBD78, None, "HANGUL SYLLABLE BYOSS", 0x31, "Hangul"),
    c(0xBD79, None, "HANGUL SYLLABLE BYONG", 0x31, "Hangul"),
    c(0xBD7A, None, "HANGUL SYLLABLE BYOJ", 0x31, "Hangul"),
    c(0xBD7B, None, "HANGUL SYLLABLE BYOC", 0x31, "Hangul"),
    c(0xBD7C, None, "HANGUL SYLLABLE BYOK", 0x31, "Hangul"),
    c(0xBD7D, None, "HANGUL SYLLABLE BYOT", 0x31, "Hangul"),
    c(0xBD7E, None, "HANGUL SYLLABLE BYOP", 0x31, "Hangul"),
    c(0xBD7F, None, "HANGUL SYLLABLE BYOH", 0x31, "Hangul"),
    c(0xBD80, None, "HANGUL SYLLABLE BU", 0x31, "Hangul"),
    c(0xBD81, None, "HANGUL SYLLABLE BUG", 0x31, "Hangul"),
    c(0xBD82, None, "HANGUL SYLLABLE BUGG", 0x31, "Hangul"),
    c(0xBD83, None, "HANGUL SYLLABLE BUGS", 0x31, "Hangul"),
    c(0xBD84, None, "HANGUL SYLLABLE BUN", 0x31, "Hangul"),
    c(0xBD85, None, "HANGUL SYLLABLE BUNJ", 0x31, "Hangul"),
    c(0xBD86, None, "HANGUL SYLLABLE BUNH", 0x31, "Hangul"),
    c(0xBD87, None, "HANGUL SYLLABLE BUD", 0x31, "Hangul"),
    c(0xBD88, None, "HANGUL SYLLABLE BUL", 0x31, "Hangul"),
    c(0xBD89, None, "HANGUL SYLLABLE BULG", 0x31, "Hangul"),
    c(0xBD8A, None, "HANGUL SYLLABLE BULM", 0x31, "Hangul"),
    c(0xBD8B, None, "HANGUL SYLLABLE BULB", 0x31, "Hangul"),
    c(0xBD8C, None, "HANGUL SYLLABLE BULS", 0x31, "Hangul"),
    c(0xBD8D, None, "HANGUL SYLLABLE BULT", 0x31, "Hangul"),
    c(0xBD8E, None, "HANGUL SYLLABLE BULP", 0x31, "Hangul"),
    c(0xBD8F, None, "HANGUL SYLLABLE BULH", 0x31, "Hangul"),
    c(0xBD90, None, "HANGUL SYLLABLE BUM", 0x31, "Hangul"),
    c(0xBD91, None, "HANGUL SYLLABLE BUB", 0x31, "Hangul"),
    c(0xBD92, None, "HANGUL SYLLABLE BUBS", 0x31, "Hangul"),
    c(0xBD93, None, "HANGUL SYLLABLE BUS", 0x31, "Hangul"),
    c(0xBD94, None, "HANGUL SYLLABLE BUSS", 0x31, "Hangul"),
    c(0xBD95, None, "HANGUL SYLLABLE BUNG", 0x31, "Hangul"),
    c(0xBD96, None, "HANGUL SYLLABLE BUJ", 0x31, "Hangul"),
    c(0xBD97, None, "HANGUL SYLLABLE BUC", 0x31, "Hangul"),
    c(0xBD98, None, "HANGUL SYLLABLE BUK", 0x31, "Hangul"),
    c(0xBD99, None, "HANGUL SYLLABLE BUT", 0x31, "Hangul"),
    c(0xBD9A, None, "HANGUL SYLLABLE BUP", 0x31, "Hangul"),
    c(0xBD9B, None, "HANGUL SYLLABLE BUH", 0x31, "Hangul"),
    c(0xBD9C, None, "HANGUL SYLLABLE BWEO", 0x31, "Hangul"),
    c(0xBD9D, None, "HANGUL SYLLABLE BWEOG", 0x31, "Hangul"),
    c(0xBD9E, None, "HANGUL SYLLABLE BWEOGG", 0x31, "Hangul"),
    c(0xBD9F, None, "HANGUL SYLLABLE BWEOGS", 0x31, "Hangul"),
    c(0xBDA0, None, "HANGUL SYLLABLE BWEON", 0x31, "Hangul"),
    c(0xBDA1, None, "HANGUL SYLLABLE BWEONJ", 0x31, "Hangul"),
    c(0xBDA2, None, "HANGUL SYLLABLE BWEONH", 0x31, "Hangul"),
    c(0xBDA3, None, "HANGUL SYLLABLE BWEOD", 0x31, "Hangul"),
    c(0xBDA4, None, "HANGUL SYLLABLE BWEOL", 0x31, "Hangul"),
    c(0xBDA5, None, "HANGUL SYLLABLE BWEOLG", 0x31, "Hangul"),
    c(0xBDA6, None, "HANGUL SYLLABLE BWEOLM", 0x31, "Hangul"),
    c(0xBDA7, None, "HANGUL SYLLABLE BWEOLB", 0x31, "Hangul"),
    c(0xBDA8, None, "HANGUL SYLLABLE BWEOLS", 0x31, "Hangul"),
    c(0xBDA9, None, "HANGUL SYLLABLE BWEOLT", 0x31, "Hangul"),
    c(0xBDAA, None, "HANGUL SYLLABLE BWEOLP", 0x31, "Hangul"),
    c(0xBDAB, None, "HANGUL SYLLABLE BWEOLH", 0x31, "Hangul"),
    c(0xBDAC, None, "HANGUL SYLLABLE BWEOM", 0x31, "Hangul"),
    c(0xBDAD, None, "HANGUL SYLLABLE BWEOB", 0x31, "Hangul"),
    c(0xBDAE, None, "HANGUL SYLLABLE BWEOBS", 0x31, "Hangul"),
    c(0xBDAF, None, "HANGUL SYLLABLE BWEOS", 0x31, "Hangul"),
    c(0xBDB0, None, "HANGUL SYLLABLE BWEOSS", 0x31, "Hangul"),
    c(0xBDB1, None, "HANGUL SYLLABLE BWEONG", 0x31, "Hangul"),
    c(0xBDB2, None, "HANGUL SYLLABLE BWEOJ", 0x31, "Hangul"),
    c(0xBDB3, None, "HANGUL SYLLABLE BWEOC", 0x31, "Hangul"),
    c(0xBDB4, None, "HANGUL SYLLABLE BWEOK", 0x31, "Hangul"),
    c(0xBDB5, None, "HANGUL SYLLABLE BWEOT", 0x31, "Hangul"),
    c(0xBDB6, None, "HANGUL SYLLABLE BWEOP", 0x31, "Hangul"),
    c(0xBDB7, None, "HANGUL SYLLABLE BWEOH", 0x31, "Hangul"),
    c(0xBDB8, None, "HANGUL SYLLABLE BWE", 0x31, "Hangul"),
    c(0xBDB9, None, "HANGUL SYLLABLE BWEG", 0x31, "Hangul"),
    c(0xBDBA, None, "HANGUL SYLLABLE BWEGG", 0x31, "Hangul"),
    c(0xBDBB, None, "HANGUL SYLLABLE BWEGS", 0x31, "Hangul"),
    c(0xBDBC, None, "HANGUL SYLLABLE BWEN", 0x31, "Hangul"),
    c(0xBDBD, None, "HANGUL SYLLABLE BWENJ", 0x31, "Hangul"),
    c(0xBDBE, None, "HANGUL SYLLABLE BWENH", 0x31, "Hangul"),
    c(0xBDBF, None, "HANGUL SYLLABLE BWED", 0x31, "Hangul"),
    c(0xBDC0, None, "HANGUL SYLLABLE BWEL", 0x31, "Hangul"),
    c(0xBDC1, None, "HANGUL SYLLABLE BWELG", 0x31, "Hangul"),
    c(0xBDC2, None, "HANGUL SYLLABLE BWELM", 0x31, "Hangul"),
    c(0xBDC3, None, "HANGUL SYLLABLE BWELB", 0x31, "Hangul"),
    c(0xBDC4, None, "HANGUL SYLLABLE BWELS", 0x31, "Hangul"),
    c(0xBDC5, None, "HANGUL SYLLABLE BWELT", 0x31, "Hangul"),
    c(0xBDC6, None, "HANGUL SYLLABLE BWELP", 0x31, "Hangul"),
    c(0xBDC7, None, "HANGUL SYLLABLE BWELH", 0x31, "Hangul"),
    c(0xBDC8, None, "HANGUL SYLLABLE BWEM", 0x31, "Hangul"),
    c(0xBDC9, None, "HANGUL SYLLABLE BWEB", 0x31, "Hangul"),
    c(0xBDCA, None, "HANGUL SYLLABLE BWEBS", 0x31, "Hangul"),
    c(0xBDCB, None, "HANGUL SYLLABLE BWES", 0x31, "Hangul"),
    c(0xBDCC, None, "HANGUL SYLLABLE BWESS", 0x31, "Hangul"),
    c(0xBDCD, None, "HANGUL SYLLABLE BWENG", 0x31, "Hangul"),
    c(0xBDCE, None, "HANGUL SYLLABLE BWEJ", 0x31, "Hangul"),
    c(0xBDCF, None, "HANGUL SYLLABLE BWEC", 0x31, "Hangul"),
    c(0xBDD0, None, "HANGUL SYLLABLE BWEK", 0x31, "Hangul"),
    c(0xBDD1, None, "HANGUL SYLLABLE BWET", 0x31, "Hangul"),
    c(0xBDD2, None, "HANGUL SYLLABLE BWEP", 0x31, "Hangul"),
    c(0xBDD3, None, "HANGUL SYLLABLE BWEH", 0x31, "Hangul"),
    c(0xBDD4, None, "HANGUL SYLLABLE BWI", 0x31, "Hangul"),
    c(0xBDD5, None, "HANGUL SYLLABLE BWIG", 0x31, "Hangul"),
    c(0xBDD6, None, "HANGUL SYLLABLE BWIGG", 0x31, "Hangul"),
    c(0xBDD7, None, "HANGUL SYLLABLE BWIGS", 0x31, "Hangul"),
    c(0xBDD8, None, "HANGUL SYLLABLE BWIN", 0x31, "Hangul"),
    c(0xBDD9, None, "HANGUL SYLLABLE BWINJ", 0x31, "Hangul"),
    c(0xBDDA, None, "HANGUL SYLLABLE BWINH", 0x31, "Hangul"),
    c(0xBDDB, None, "HANGUL SYLLABLE BWID", 0x31, "Hangul"),
    c(0xBDDC, None, "HANGUL SYLLABLE BWIL", 0x31, "Hangul"),
    c(0xBDDD, None, "HANGUL SYLLABLE BWILG", 0x31, "Hangul"),
    c(0xBDDE, None, "HANGUL SYLLABLE BWILM", 0x31, "Hangul"),
    c(0xBDDF, None, "HANGUL SYLLABLE BWILB", 0x31, "Hangul"),
    c(0xBDE0, None, "HANGUL SYLLABLE BWILS", 0x31, "Hangul"),
    c(0xBDE1, None, "HANGUL SYLLABLE BWILT", 0x31, "Hangul"),
    c(0xBDE2, None, "HANGUL SYLLABLE BWILP", 0x31, "Hangul"),
    c(0xBDE3, None, "HANGUL SYLLABLE BWILH", 0x31, "Hangul"),
    c(0xBDE4, None, "HANGUL SYLLABLE BWIM", 0x31, "Hangul"),
    c(0xBDE5, None, "HANGUL SYLLABLE BWIB", 0x31, "Hangul"),
    c(0xBDE6, None, "HANGUL SYLLABLE BWIBS", 0x31, "Hangul"),
    c(0xBDE7, None, "HANGUL SYLLABLE BWIS", 0x31, "Hangul"),
    c(0xBDE8, None, "HANGUL SYLLABLE BWISS", 0x31, "Hangul"),
    c(0xBDE9, None, "HANGUL SYLLABLE BWING", 0x31, "Hangul"),
    c(0xBDEA, None, "HANGUL SYLLABLE BWIJ", 0x31, "Hangul"),
    c(0xBDEB, None, "HANGUL SYLLABLE BWIC", 0x31, "Hangul"),
    c(0xBDEC, None, "HANGUL SYLLABLE BWIK", 0x31, "Hangul"),
    c(0xBDED, None, "HANGUL SYLLABLE BWIT", 0x31, "Hangul"),
    c(0xBDEE, None, "HANGUL SYLLABLE BWIP", 0x31, "Hangul"),
    c(0xBDEF, None, "HANGUL SYLLABLE BWIH", 0x31, "Hangul"),
    c(0xBDF0, None, "HANGUL SYLLABLE BYU", 0x31, "Hangul"),
    c(0xBDF1, None, "HANGUL SYLLABLE BYUG", 0x31, "Hangul"),
    c(0xBDF2, None, "HANGUL SYLLABLE BYUGG", 0x31, "Hangul"),
    c(0xBDF3, None, "HANGUL SYLLABLE BYUGS", 0x31, "Hangul"),
    c(0xBDF4, None, "HANGUL SYLLABLE BYUN", 0x31, "Hangul"),
    c(0xBDF5, None, "HANGUL SYLLABLE BYUNJ", 0x31, "Hangul"),
    c(0xBDF6, None, "HANGUL SYLLABLE BYUNH", 0x31, "Hangul"),
    c(0xBDF7, None, "HANGUL SYLLABLE BYUD", 0x31, "Hangul"),
    c(0xBDF8, None, "HANGUL SYLLABLE BYUL", 0x31, "Hangul"),
    c(0xBDF9, None, "HANGUL SYLLABLE BYULG", 0x31, "Hangul"),
    c(0xBDFA, None, "HANGUL SYLLABLE BYULM", 0x31, "Hangul"),
    c(0xBDFB, None, "HANGUL SYLLABLE BYULB", 0x31, "Hangul"),
    c(0xBDFC, None, "HANGUL SYLLABLE BYULS", 0x31, "Hangul"),
    c(0xBDFD, None, "HANGUL SYLLABLE BYULT", 0x31, "Hangul"),
    c(0xBDFE, None, "HANGUL SYLLABLE BYULP", 0x31, "Hangul"),
    c(0xBDFF, None, "HANGUL SYLLABLE BYULH", 0x31, "Hangul"),
    c(0xBE00, None, "HANGUL SYLLABLE BYUM", 0x31, "Hangul"),
    c(0xBE01, None, "HANGUL SYLLABLE BYUB", 0x31, "Hangul"),
    c(0xBE02, None, "HANGUL SYLLABLE BYUBS", 0x31, "Hangul"),
    c(0xBE03, None, "HANGUL SYLLABLE BYUS", 0x31, "Hangul"),
    c(0xBE04, None, "HANGUL SYLLABLE BYUSS", 0x31, "Hangul"),
    c(0xBE05, None, "HANGUL SYLLABLE BYUNG", 0x31, "Hangul"),
    c(0xBE06, None, "HANGUL SYLLABLE BYUJ", 0x31, "Hangul"),
    c(0xBE07, None, "HANGUL SYLLABLE BYUC", 0x31, "Hangul"),
    c(0xBE08, None, "HANGUL SYLLABLE BYUK", 0x31, "Hangul"),
    c(0xBE09, None, "HANGUL SYLLABLE BYUT", 0x31, "Hangul"),
    c(0xBE0A, None, "HANGUL SYLLABLE BYUP", 0x31, "Hangul"),
    c(0xBE0B, None, "HANGUL SYLLABLE BYUH", 0x31, "Hangul"),
    c(0xBE0C, None, "HANGUL SYLLABLE BEU", 0x31, "Hangul"),
    c(0xBE0D, None, "HANGUL SYLLABLE BEUG", 0x31, "Hangul"),
    c(0xBE0E, None, "HANGUL SYLLABLE BEUGG", 0x31, "Hangul"),
    c(0xBE0F, None, "HANGUL SYLLABLE BEUGS", 0x31, "Hangul"),
    c(0xBE10, None, "HANGUL SYLLABLE BEUN", 0x31, "Hangul"),
    c(0xBE11, None, "HANGUL SYLLABLE BEUNJ", 0x31, "Hangul"),
    c(0xBE12, None, "HANGUL SYLLABLE BEUNH", 0x31, "Hangul"),
    c(0xBE13, None, "HANGUL SYLLABLE BEUD", 0x31, "Hangul"),
    c(0xBE14, None, "HANGUL SYLLABLE BEUL", 0x31, "Hangul"),
    c(0xBE15, None, "HANGUL SYLLABLE BEULG", 0x31, "Hangul"),
    c(0xBE16, None, "HANGUL SYLLABLE BEULM", 0x31, "Hangul"),
    c(0xBE17, None, "HANGUL SYLLABLE BEULB", 0x31, "Hangul"),
    c(0xBE18, None, "HANGUL SYLLABLE BEULS", 0x31, "Hangul"),
    c(0xBE19, None, "HANGUL SYLLABLE BEULT", 0x31, "Hangul"),
    c(0xBE1A, None, "HANGUL SYLLABLE BEULP", 0x31, "Hangul"),
    c(0xBE1B, None, "HANGUL SYLLABLE BEULH", 0x31, "Hangul"),
    c(0xBE1C, None, "HANGUL SYLLABLE BEUM", 0x31, "Hangul"),
    c(0xBE1D, None, "HANGUL SYLLABLE BEUB", 0x31, "Hangul"),
    c(0xBE1E, None, "HANGUL SYLLABLE BEUBS", 0x31, "Hangul"),
    c(0xBE1F, None, "HANGUL SYLLABLE BEUS", 0x31, "Hangul"),
    c(0xBE20, None, "HANGUL SYLLABLE BEUSS", 0x31, "Hangul"),
    c(0xBE21, None, "HANGUL SYLLABLE BEUNG", 0x31, "Hangul"),
    c(0xBE22, None, "HANGUL SYLLABLE BEUJ", 0x31, "Hangul"),
    c(0xBE23, None, "HANGUL SYLLABLE BEUC", 0x31, "Hangul"),
    c(0xBE24, None, "HANGUL SYLLABLE BEUK", 0x31, "Hangul"),
    c(0xBE25, None, "HANGUL SYLLABLE BEUT", 0x31, "Hangul"),
    c(0xBE26, None, "HANGUL SYLLABLE BEUP", 0x31, "Hangul"),
    c(0xBE27, None, "HANGUL SYLLABLE BEUH", 0x31, "Hangul"),
    c(0xBE28, None, "HANGUL SYLLABLE BYI", 0x31, "Hangul"),
    c(0xBE29, None, "HANGUL SYLLABLE BYIG", 0x31, "Hangul"),
    c(0xBE2A, None, "HANGUL SYLLABLE BYIGG", 0x31, "Hangul"),
    c(0xBE2B, None, "HANGUL SYLLABLE BYIGS", 0x31, "Hangul"),
    c(0xBE2C, None, "HANGUL SYLLABLE BYIN", 0x31, "Hangul"),
    c(0xBE2D, None, "HANGUL SYLLABLE BYINJ", 0x31, "Hangul"),
    c(0xBE2E, None, "HANGUL SYLLABLE BYINH", 0x31, "Hangul"),
    c(0xBE2F, None, "HANGUL SYLLABLE BYID", 0x31, "Hangul"),
    c(0xBE30, None, "HANGUL SYLLABLE BYIL", 0x31, "Hangul"),
    c(0xBE31, None, "HANGUL SYLLABLE BYILG", 0x31, "Hangul"),
    c(0xBE32, None, "HANGUL SYLLABLE BYILM", 0x31, "Hangul"),
    c(0xBE33, None, "HANGUL SYLLABLE BYILB", 0x31, "Hangul"),
    c(0xBE34, None, "HANGUL SYLLABLE BYILS", 0x31, "Hangul"),
    c(0xBE35, None, "HANGUL SYLLABLE BYILT", 0x31, "Hangul"),
    c(0xBE36, None, "HANGUL SYLLABLE BYILP", 0x31, "Hangul"),
    c(0xBE37, None, "HANGUL SYLLABLE BYILH", 0x31, "Hangul"),
    c(0xBE38, None, "HANGUL SYLLABLE BYIM", 0x31, "Hangul"),
    c(0xBE39, None, "HANGUL SYLLABLE BYIB", 0x31, "Hangul"),
    c(0xBE3A, None, "HANGUL SYLLABLE BYIBS", 0x31, "Hangul"),
    c(0xBE3B, None, "HANGUL SYLLABLE BYIS", 0x31, "Hangul"),
    c(0xBE3C, None, "HANGUL SYLLABLE BYISS", 0x31, "Hangul"),
    c(0xBE3D, None, "HANGUL SYLLABLE BYING", 0x31, "Hangul"),
    c(0xBE3E, None, "HANGUL SYLLABLE BYIJ", 0x31, "Hangul"),
    c(0xBE3F, None, "HANGUL SYLLABLE BYIC", 0x31, "Hangul"),
    c(0xBE40, None, "HANGUL SYLLABLE BYIK", 0x31, "Hangul"),
    c(0xBE41, None, "HANGUL SYLLABLE BYIT", 0x31, "Hangul"),
    c(0xBE42, None, "HANGUL SYLLABLE BYIP", 0x31, "Hangul"),
    c(0xBE43, None, "HANGUL SYLLABLE BYIH", 0x31, "Hangul"),
    c(0xBE44, None, "HANGUL SYLLABLE BI", 0x31, "Hangul"),
    c(0xBE45, None, "HANGUL SYLLABLE BIG", 0x31, "Hangul"),
    c(0xBE46, None, "HANGUL SYLLABLE BIGG", 0x31, "Hangul"),
    c(0xBE47, None, "HANGUL SYLLABLE BIGS", 0x31, "Hangul"),
    c(0xBE48, None, "HANGUL SYLLABLE BIN", 0x31, "Hangul"),
    c(0xBE49, None, "HANGUL SYLLABLE BINJ", 0x31, "Hangul"),
    c(0xBE4A, None, "HANGUL SYLLABLE BINH", 0x31, "Hangul"),
    c(0xBE4B, None, "HANGUL SYLLABLE BID", 0x31, "Hangul"),
    c(0xBE4C, None, "HANGUL SYLLABLE BIL", 0x31, "Hangul"),
    c(0xBE4D, None, "HANGUL SYLLABLE BILG", 0x31, "Hangul"),
    c(0xBE4E, None, "HANGUL SYLLABLE BILM", 0x31, "Hangul"),
    c(0xBE4F, None, "HANGUL SYLLABLE BILB", 0x31, "Hangul"),
    c(0xBE50, None, "HANGUL SYLLABLE BILS", 0x31, "Hangul"),
    c(0xBE51, None, "HANGUL SYLLABLE BILT", 0x31, "Hangul"),
    c(0xBE52, None, "HANGUL SYLLABLE BILP", 0x31, "Hangul"),
    c(0xBE53, None, "HANGUL SYLLABLE BILH", 0x31, "Hangul"),
    c(0xBE54, None, "HANGUL SYLLABLE BIM", 0x31, "Hangul"),
    c(0xBE55, None, "HANGUL SYLLABLE BIB", 0x31, "Hangul"),
    c(0xBE56, None, "HANGUL SYLLABLE BIBS", 0x31, "Hangul"),
    c(0xBE57, None, "HANGUL SYLLABLE BIS", 0x31, "Hangul"),
    c(0xBE58, None, "HANGUL SYLLABLE BISS", 0x31, "Hangul"),
    c(0xBE59, None, "HANGUL SYLLABLE BING", 0x31, "Hangul"),
    c(0xBE5A, None, "HANGUL SYLLABLE BIJ", 0x31, "Hangul"),
    c(0xBE5B, None, "HANGUL SYLLABLE BIC", 0x31, "Hangul"),
    c(0xBE5C, None, "HANGUL SYLLABLE BIK", 0x31, "Hangul"),
    c(0xBE5D, None, "HANGUL SYLLABLE BIT", 0x31, "Hangul"),
    c(0xBE5E, None, "HANGUL SYLLABLE BIP", 0x31, "Hangul"),
    c(0xBE5F, None, "HANGUL SYLLABLE BIH", 0x31, "Hangul"),
    c(0xBE60, None, "HANGUL SYLLABLE BBA", 0x31, "Hangul"),
    c(0xBE61, None, "HANGUL SYLLABLE BBAG", 0x31, "Hangul"),
    c(0xBE62, None, "HANGUL SYLLABLE BBAGG", 0x31, "Hangul"),
    c(0xBE63, None, "HANGUL SYLLABLE BBAGS", 0x31, "Hangul"),
    c(0xBE64, None, "HANGUL SYLLABLE BBAN", 0x31, "Hangul"),
    c(0xBE65, None, "HANGUL SYLLABLE BBANJ", 0x31, "Hangul"),
    c(0xBE66, None, "HANGUL SYLLABLE BBANH", 0x31, "Hangul"),
    c(0xBE67, None, "HANGUL SYLLABLE BBAD", 0x31, "Hangul"),
    c(0xBE68, None, "HANGUL SYLLABLE BBAL", 0x31, "Hangul"),
    c(0xBE69, None, "HANGUL SYLLABLE BBALG", 0x31, "Hangul"),
    c(0xBE6A, None, "HANGUL SYLLABLE BBALM", 0x31, "Hangul"),
    c(0xBE6B, None, "HANGUL SYLLABLE BBALB", 0x31, "Hangul"),
    c(0xBE6C, None, "HANGUL SYLLABLE BBALS", 0x31, "Hangul"),
    c(0xBE6D, None, "HANGUL SYLLABLE BBALT", 0x31, "Hangul"),
    c(0xBE6E, None, "HANGUL SYLLABLE BBALP", 0x31, "Hangul"),
    c(0xBE6F, None, "HANGUL SYLLABLE BBALH", 0x31, "Hangul"),
    c(0xBE70, None, "HANGUL SYLLABLE BBAM", 0x31, "Hangul"),
    c(0xBE71, None, "HANGUL SYLLABLE BBAB", 0x31, "Hangul"),
    c(0xBE72, None, "HANGUL SYLLABLE BBABS", 0x31, "Hangul"),
    c(0xBE73, None, "HANGUL SYLLABLE BBAS", 0x31, "Hangul"),
    c(0xBE74, None, "HANGUL SYLLABLE BBASS", 0x31, "Hangul"),
    c(0xBE75, None, "HANGUL SYLLABLE BBANG", 0x31, "Hangul"),
    c(0xBE76, None, "HANGUL SYLLABLE BBAJ", 0x31, "Hangul"),
    c(0xBE77, None, "HANGUL SYLLABLE BBAC", 0x31, "Hangul"),
    c(0xBE78, None, "HANGUL SYLLABLE BBAK", 0x31, "Hangul"),
    c(0xBE79, None, "HANGUL SYLLABLE BBAT", 0x31, "Hangul"),
    c(0xBE7A, None, "HANGUL SYLLABLE BBAP", 0x31, "Hangul"),
    c(0xBE7B, None, "HANGUL SYLLABLE BBAH", 0x31, "Hangul"),
    c(0xBE7C, None, "HANGUL SYLLABLE BBAE", 0x31, "Hangul"),
    c(0xBE7D, None, "HANGUL SYLLABLE BBAEG", 0x31, "Hangul"),
    c(0xBE7E, None, "HANGUL SYLLABLE BBAEGG", 0x31, "Hangul"),
    c(0xBE7F, None, "HANGUL SYLLABLE BBAEGS", 0x31, "Hangul"),
    c(0xBE80, None, "HANGUL SYLLABLE BBAEN", 0x31, "Hangul"),
    c(0xBE81, None, "HANGUL SYLLABLE BBAENJ", 0x31, "Hangul"),
    c(0xBE82, None, "HANGUL SYLLABLE BBAENH", 0x31, "Hangul"),
    c(0xBE83, None, "HANGUL SYLLABLE BBAED", 0x31, "Hangul"),
    c(0xBE84, None, "HANGUL SYLLABLE BBAEL", 0x31, "Hangul"),
    c(0xBE85, None, "HANGUL SYLLABLE BBAELG", 0x31, "Hangul"),
    c(0xBE86, None, "HANGUL SYLLABLE BBAELM", 0x31, "Hangul"),
    c(0xBE87, None, "HANGUL SYLLABLE BBAELB", 0x31, "Hangul"),
    c(0xBE88, None, "HANGUL SYLLABLE BBAELS", 0x31, "Hangul"),
    c(0xBE89, None, "HANGUL SYLLABLE BBAELT", 0x31, "Hangul"),
    c(0xBE8A, None, "HANGUL SYLLABLE BBAELP", 0x31, "Hangul"),
    c(0xBE8B, None, "HANGUL SYLLABLE BBAELH", 0x31, "Hangul"),
    c(0xBE8C, None, "HANGUL SYLLABLE BBAEM", 0x31, "Hangul"),
    c(0xBE8D, None, "HANGUL SYLLABLE BBAEB", 0x31, "Hangul"),
    c(0xBE8E, None, "HANGUL SYLLABLE BBAEBS", 0x31, "Hangul"),
    c(0xBE8F, None, "HANGUL SYLLABLE BBAES", 0x31, "Hangul"),
    c(0xBE90, None, "HANGUL SYLLABLE BBAESS", 0x31, "Hangul"),
    c(0xBE91, None, "HANGUL SYLLABLE BBAENG", 0x31, "Hangul"),
    c(0xBE92, None, "HANGUL SYLLABLE BBAEJ", 0x31, "Hangul"),
    c(0xBE93, None, "HANGUL SYLLABLE BBAEC", 0x31, "Hangul"),
    c(0xBE94, None, "HANGUL SYLLABLE BBAEK", 0x31, "Hangul"),
    c(0xBE95, None, "HANGUL SYLLABLE BBAET", 0x31, "Hangul"),
    c(0xBE96, None, "HANGUL SYLLABLE BBAEP", 0x31, "Hangul"),
    c(0xBE97, None, "HANGUL SYLLABLE BBAEH", 0x31, "Hangul"),
    c(0xBE98, None, "HANGUL SYLLABLE BBYA", 0x31, "Hangul"),
    c(0xBE99, None, "HANGUL SYLLABLE BBYAG", 0x31, "Hangul"),
    c(0xBE9A, None, "HANGUL SYLLABLE BBYAGG", 0x31, "Hangul"),
    c(0xBE9B, None, "HANGUL SYLLABLE BBYAGS", 0x31, "Hangul"),
    c(0xBE9C, None, "HANGUL SYLLABLE BBYAN", 0x31, "Hangul"),
    c(0xBE9D, None, "HANGUL SYLLABLE BBYANJ", 0x31, "Hangul"),
    c(0xBE9E, None, "HANGUL SYLLABLE BBYANH", 0x31, "Hangul"),
    c(0xBE9F, None, "HANGUL SYLLABLE BBYAD", 0x31, "Hangul"),
    c(0xBEA0, None, "HANGUL SYLLABLE BBYAL", 0x31, "Hangul"),
    c(0xBEA1, None, "HANGUL SYLLABLE BBYALG", 0x31, "Hangul"),
    c(0xBEA2, None, "HANGUL SYLLABLE BBYALM", 0x31, "Hangul"),
    c(0xBEA3, None, "HANGUL SYLLABLE BBYALB", 0x31, "Hangul"),
    c(0xBEA4, None, "HANGUL SYLLABLE BBYALS", 0x31, "Hangul"),
    c(0xBEA5, None, "HANGUL SYLLABLE BBYALT", 0x31, "Hangul"),
    c(0xBEA6, None, "HANGUL SYLLABLE BBYALP", 0x31, "Hangul"),
    c(0xBEA7, None, "HANGUL SYLLABLE BBYALH", 0x31, "Hangul"),
    c(0xBEA8, None, "HANGUL SYLLABLE BBYAM", 0x31, "Hangul"),
    c(0xBEA9, None, "HANGUL SYLLABLE BBYAB", 0x31, "Hangul"),
    c(0xBEAA, None, "HANGUL SYLLABLE BBYABS", 0x31, "Hangul"),
    c(0xBEAB, None, "HANGUL SYLLABLE BBYAS", 0x31, "Hangul"),
    c(0xBEAC, None, "HANGUL SYLLABLE BBYASS", 0x31, "Hangul"),
    c(0xBEAD, None, "HANGUL SYLLABLE BBYANG", 0x31, "Hangul"),
    c(0xBEAE, None, "HANGUL SYLLABLE BBYAJ", 0x31, "Hangul"),
    c(0xBEAF, None, "HANGUL SYLLABLE BBYAC", 0x31, "Hangul"),
    c(0xBEB0, None, "HANGUL SYLLABLE BBYAK", 0x31, "Hangul"),
    c(0xBEB1, None, "HANGUL SYLLABLE BBYAT", 0x31, "Hangul"),
    c(0xBEB2, None, "HANGUL SYLLABLE BBYAP", 0x31, "Hangul"),
    c(0xBEB3, None, "HANGUL SYLLABLE BBYAH", 0x31, "Hangul"),
    c(0xBEB4, None, "HANGUL SYLLABLE BBYAE", 0x31, "Hangul"),
    c(0xBEB5, None, "HANGUL SYLLABLE BBYAEG", 0x31, "Hangul"),
    c(0xBEB6, None, "HANGUL SYLLABLE BBYAEGG", 0x31, "Hangul"),
    c(0xBEB7, None, "HANGUL SYLLABLE BBYAEGS", 0x31, "Hangul"),
    c(0xBEB8, None, "HANGUL SYLLABLE BBYAEN", 0x31, "Hangul"),
    c(0xBEB9, None, "HANGUL SYLLABLE BBYAENJ", 0x31, "Hangul"),
    c(0xBEBA, None, "HANGUL SYLLABLE BBYAENH", 0x31, "Hangul"),
    c(0xBEBB, None, "HANGUL SYLLABLE BBYAED", 0x31, "Hangul"),
    c(0xBEBC, None, "HANGUL SYLLABLE BBYAEL", 0x31, "Hangul"),
    c(0xBEBD, None, "HANGUL SYLLABLE BBYAELG", 0x31, "Hangul"),
    c(0xBEBE, None, "HANGUL SYLLABLE BBYAELM", 0x31, "Hangul"),
    c(0xBEBF, None, "HANGUL SYLLABLE BBYAELB", 0x31, "Hangul"),
    c(0xBEC0, None, "HANGUL SYLLABLE BBYAELS", 0x31, "Hangul"),
    c(0xBEC1, None, "HANGUL SYLLABLE BBYAELT", 0x31, "Hangul"),
    c(0xBEC2, None, "HANGUL SYLLABLE BBYAELP", 0x31, "Hangul"),
    c(0xBEC3, None, "HANGUL SYLLABLE BBYAELH", 0x31, "Hangul"),
    c(0xBEC4, None, "HANGUL SYLLABLE BBYAEM", 0x31, "Hangul"),
    c(0xBEC5, None, "HANGUL SYLLABLE BBYAEB", 0x31, "Hangul"),
    c(0xBEC6, None, "HANGUL SYLLABLE BBYAEBS", 0x31, "Hangul"),
    c(0xBEC7, None, "HANGUL SYLLABLE BBYAES", 0x31, "Hangul"),
    c(0xBEC8, None, "HANGUL SYLLABLE BBYAESS", 0x31, "Hangul"),
    c(0xBEC9, None, "HANGUL SYLLABLE BBYAENG", 0x31, "Hangul"),
    c(0xBECA, None, "HANGUL SYLLABLE BBYAEJ", 0x31, "Hangul"),
    c(0xBECB, None, "HANGUL SYLLABLE BBYAEC", 0x31, "Hangul"),
    c(0xBECC, None, "HANGUL SYLLABLE BBYAEK", 0x31, "Hangul"),
    c(0xBECD, None, "HANGUL SYLLABLE BBYAET", 0x31, "Hangul"),
    c(0xBECE, None, "HANGUL SYLLABLE BBYAEP", 0x31, "Hangul"),
    c(0xBECF, None, "HANGUL SYLLABLE BBYAEH", 0x31, "Hangul"),
    c(0xBED0, None, "HANGUL SYLLABLE BBEO", 0x31, "Hangul"),
    c(0xBED1, None, "HANGUL SYLLABLE BBEOG", 0x31, "Hangul"),
    c(0xBED2, None, "HANGUL SYLLABLE BBEOGG", 0x31, "Hangul"),
    c(0xBED3, None, "HANGUL SYLLABLE BBEOGS", 0x31, "Hangul"),
    c(0xBED4, None, "HANGUL SYLLABLE BBEON", 0x31, "Hangul"),
    c(0xBED5, None, "HANGUL SYLLABLE BBEONJ", 0x31, "Hangul"),
    c(0xBED6, None, "HANGUL SYLLABLE BBEONH", 0x31, "Hangul"),
    c(0xBED7, None, "HANGUL SYLLABLE BBEOD", 0x31, "Hangul"),
    c(0xBED8, None, "HANGUL SYLLABLE BBEOL", 0x31, "Hangul"),
    c(0xBED9, None, "HANGUL SYLLABLE BBEOLG", 0x31, "Hangul"),
    c(0xBEDA, None, "HANGUL SYLLABLE BBEOLM", 0x31, "Hangul"),
    c(0xBEDB, None, "HANGUL SYLLABLE BBEOLB", 0x31, "Hangul"),
    c(0xBEDC, None, "HANGUL SYLLABLE BBEOLS", 0x31, "Hangul"),
    c(0xBEDD, None, "HANGUL SYLLABLE BBEOLT", 0x31, "Hangul"),
    c(0xBEDE, None, "HANGUL SYLLABLE BBEOLP", 0x31, "Hangul"),
    c(0xBEDF, None, "HANGUL SYLLABLE BBEOLH", 0x31, "Hangul"),
    c(0xBEE0, None, "HANGUL SYLLABLE BBEOM", 0x31, "Hangul"),
    c(0xBEE1, None, "HANGUL SYLLABLE BBEOB", 0x31, "Hangul"),
    c(0xBEE2, None, "HANGUL SYLLABLE BBEOBS", 0x31, "Hangul"),
    c(0xBEE3, None, "HANGUL SYLLABLE BBEOS", 0x31, "Hangul"),
    c(0xBEE4, None, "HANGUL SYLLABLE BBEOSS", 0x31, "Hangul"),
    c(0xBEE5, None, "HANGUL SYLLABLE BBEONG", 0x31, "Hangul"),
    c(0xBEE6, None, "HANGUL SYLLABLE BBEOJ", 0x31, "Hangul"),
    c(0xBEE7, None, "HANGUL SYLLABLE BBEOC", 0x31, "Hangul"),
    c(0xBEE8, None, "HANGUL SYLLABLE BBEOK", 0x31, "Hangul"),
    c(0xBEE9, None, "HANGUL SYLLABLE BBEOT", 0x31, "Hangul"),
    c(0xBEEA, None, "HANGUL SYLLABLE BBEOP", 0x31, "Hangul"),
    c(0xBEEB, None, "HANGUL SYLLABLE BBEOH", 0x31, "Hangul"),
    c(0xBEEC, None, "HANGUL SYLLABLE BBE", 0x31, "Hangul"),
    c(0xBEED, None, "HANGUL SYLLABLE BBEG", 0x31, "Hangul"),
    c(0xBEEE, None, "HANGUL SYLLABLE BBEGG", 0x31, "Hangul"),
    c(0xBEEF, None, "HANGUL SYLLABLE BBEGS", 0x31, "Hangul"),
    c(0xBEF0, None, "HANGUL SYLLABLE BBEN", 0x31, "Hangul"),
    c(0xBEF1, None, "HANGUL SYLLABLE BBENJ", 0x31, "Hangul"),
    c(0xBEF2, None, "HANGUL SYLLABLE BBENH", 0x31, "Hangul"),
    c(0xBEF3, None, "HANGUL SYLLABLE BBED", 0x31, "Hangul"),
    c(0xBEF4, None, "HANGUL SYLLABLE BBEL", 0x31, "Hangul"),
    c(0xBEF5, None, "HANGUL SYLLABLE BBELG", 0x31, "Hangul"),
    c(0xBEF6, None, "HANGUL SYLLABLE BBELM", 0x31, "Hangul"),
    c(0xBEF7, None, "HANGUL SYLLABLE BBELB", 0x31, "Hangul"),
    c(0xBEF8, None, "HANGUL SYLLABLE BBELS", 0x31, "Hangul"),
    c(0xBEF9, None, "HANGUL SYLLABLE BBELT", 0x31, "Hangul"),
    c(0xBEFA, None, "HANGUL SYLLABLE BBELP", 0x31, "Hangul"),
    c(0xBEFB, None, "HANGUL SYLLABLE BBELH", 0x31, "Hangul"),
    c(0xBEFC, None, "HANGUL SYLLABLE BBEM", 0x31, "Hangul"),
    c(0xBEFD, None, "HANGUL SYLLABLE BBEB", 0x31, "Hangul"),
    c(0xBEFE, None, "HANGUL SYLLABLE BBEBS", 0x31, "Hangul"),
    c(0xBEFF, None, "HANGUL SYLLABLE BBES", 0x31, "Hangul"),
    c(0xBF00, None, "HANGUL SYLLABLE BBESS", 0x31, "Hangul"),
    c(0xBF01, None, "HANGUL SYLLABLE BBENG", 0x31, "Hangul"),
    c(0xBF02, None, "HANGUL SYLLABLE BBEJ", 0x31, "Hangul"),
    c(0xBF03, None, "HANGUL SYLLABLE BBEC", 0x31, "Hangul"),
    c(0xBF04, None, "HANGUL SYLLABLE BBEK", 0x31, "Hangul"),
    c(0xBF05, None, "HANGUL SYLLABLE BBET", 0x31, "Hangul"),
    c(0xBF06, None, "HANGUL SYLLABLE BBEP", 0x31, "Hangul"),
    c(0xBF07, None, "HANGUL SYLLABLE BBEH", 0x31, "Hangul"),
    c(0xBF08, None, "HANGUL SYLLABLE BBYEO", 0x31, "Hangul"),
    c(0xBF09, None, "HANGUL SYLLABLE BBYEOG", 0x31, "Hangul"),
    c(0xBF0A, None, "HANGUL SYLLABLE BBYEOGG", 0x31, "Hangul"),
    c(0xBF0B, None, "HANGUL SYLLABLE BBYEOGS", 0x31, "Hangul"),
    c(0xBF0C, None, "HANGUL SYLLABLE BBYEON", 0x31, "Hangul"),
    c(0xBF0D, None, "HANGUL SYLLABLE BBYEONJ", 0x31, "Hangul"),
    c(0xBF0E, None, "HANGUL SYLLABLE BBYEONH", 0x31, "Hangul"),
    c(0xBF0F, None, "HANGUL SYLLABLE BBYEOD", 0x31, "Hangul"),
    c(0xBF10, None, "HANGUL SYLLABLE BBYEOL", 0x31, "Hangul"),
    c(0xBF11, None, "HANGUL SYLLABLE BBYEOLG", 0x31, "Hangul"),
    c(0xBF12, None, "HANGUL SYLLABLE BBYEOLM", 0x31, "Hangul"),
    c(0xBF13, None, "HANGUL SYLLABLE BBYEOLB", 0x31, "Hangul"),
    c(0xBF14, None, "HANGUL SYLLABLE BBYEOLS", 0x31, "Hangul"),
    c(0xBF15, None, "HANGUL SYLLABLE BBYEOLT", 0x31, "Hangul"),
    c(0xBF16, None, "HANGUL SYLLABLE BBYEOLP", 0x31, "Hangul"),
    c(0xBF17, None, "HANGUL SYLLABLE BBYEOLH", 0x31, "Hangul"),
    c(0xBF18, None, "HANGUL SYLLABLE BBYEOM", 0x31, "Hangul"),
    c(0xBF19, None, "HANGUL SYLLABLE BBYEOB", 0x31, "Hangul"),
    c(0xBF1A, None, "HANGUL SYLLABLE BBYEOBS", 0x31, "Hangul"),
    c(0xBF1B, None, "HANGUL SYLLABLE BBYEOS", 0x31, "Hangul"),
    c(0xBF1C, None, "HANGUL SYLLABLE BBYEOSS", 0x31, "Hangul"),
    c(0xBF1D, None, "HANGUL SYLLABLE BBYEONG", 0x31, "Hangul"),
    c(0xBF1E, None, "HANGUL SYLLABLE BBYEOJ", 0x31, "Hangul"),
    c(0xBF1F, None, "HANGUL SYLLABLE BBYEOC", 0x31, "Hangul"),
    c(0xBF20, None, "HANGUL SYLLABLE BBYEOK", 0x31, "Hangul"),
    c(0xBF21, None, "HANGUL SYLLABLE BBYEOT", 0x31, "Hangul"),
    c(0xBF22, None, "HANGUL SYLLABLE BBYEOP", 0x31, "Hangul"),
    c(0xBF23, None, "HANGUL SYLLABLE BBYEOH", 0x31, "Hangul"),
    c(0xBF24, None, "HANGUL SYLLABLE BBYE", 0x31, "Hangul"),
    c(0xBF25, None, "HANGUL SYLLABLE BBYEG", 0x31, "Hangul"),
    c(0xBF26, None, "HANGUL SYLLABLE BBYEGG", 0x31, "Hangul"),
    c(0xBF27, None, "HANGUL SYLLABLE BBYEGS", 0x31, "Hangul"),
    c(0xBF28, None, "HANGUL SYLLABLE BBYEN", 0x31, "Hangul"),
    c(0xBF29, None, "HANGUL SYLLABLE BBYENJ", 0x31, "Hangul"),
    c(0xBF2A, None, "HANGUL SYLLABLE BBYENH", 0x31, "Hangul"),
    c(0xBF2B, None, "HANGUL SYLLABLE BBYED", 0x31, "Hangul"),
    c(0xBF2C, None, "HANGUL SYLLABLE BBYEL", 0x31, "Hangul"),
    c(0xBF2D, None, "HANGUL SYLLABLE BBYELG", 0x31, "Hangul"),
    c(0xBF2E, None, "HANGUL SYLLABLE BBYELM", 0x31, "Hangul"),
    c(0xBF2F, None, "HANGUL SYLLABLE BBYELB", 0x31, "Hangul"),
    c(0xBF30, None, "HANGUL SYLLABLE BBYELS", 0x31, "Hangul"),
    c(0xBF31, None, "HANGUL SYLLABLE BBYELT", 0x31, "Hangul"),
    c(0xBF32, None, "HANGUL SYLLABLE BBYELP", 0x31, "Hangul"),
    c(0xBF33, None, "HANGUL SYLLABLE BBYELH", 0x31, "Hangul"),
    c(0xBF34, None, "HANGUL SYLLABLE BBYEM", 0x31, "Hangul"),
    c(0xBF35, None, "HANGUL SYLLABLE BBYEB", 0x31, "Hangul"),
    c(0xBF36, None, "HANGUL SYLLABLE BBYEBS", 0x31, "Hangul"),
    c(0xBF37, None, "HANGUL SYLLABLE BBYES", 0x31, "Hangul"),
    c(0xBF38, None, "HANGUL SYLLABLE BBYESS", 0x31, "Hangul"),
    c(0xBF39, None, "HANGUL SYLLABLE BBYENG", 0x31, "Hangul"),
    c(0xBF3A, None, "HANGUL SYLLABLE BBYEJ", 0x31, "Hangul"),
    c(0xBF3B, None, "HANGUL SYLLABLE BBYEC", 0x31, "Hangul"),
    c(0xBF3C, None, "HANGUL SYLLABLE BBYEK", 0x31, "Hangul"),
    c(0xBF3D, None, "HANGUL SYLLABLE BBYET", 0x31, "Hangul"),
    c(0xBF3E, None, "HANGUL SYLLABLE BBYEP", 0x31, "Hangul"),
    c(0xBF3F, None, "HANGUL SYLLABLE BBYEH", 0x31, "Hangul"),
    c(0xBF40, None, "HANGUL SYLLABLE BBO", 0x31, "Hangul"),
    c(0xBF41, None, "HANGUL SYLLABLE BBOG", 0x31, "Hangul"),
    c(0xBF42, None, "HANGUL SYLLABLE BBOGG", 0x31, "Hangul"),
    c(0xBF43, None, "HANGUL SYLLABLE BBOGS", 0x31, "Hangul"),
    c(0xBF44, None, "HANGUL SYLLABLE BBON", 0x31, "Hangul"),
    c(0xBF45, None, "HANGUL SYLLABLE BBONJ", 0x31, "Hangul"),
    c(0xBF46, None, "HANGUL SYLLABLE BBONH", 0x31, "Hangul"),
    c(0xBF47, None, "HANGUL SYLLABLE BBOD", 0x31, "Hangul"),
    c(0xBF48, None, "HANGUL SYLLABLE BBOL", 0x31, "Hangul"),
    c(0xBF49, None, "HANGUL SYLLABLE BBOLG", 0x31, "Hangul"),
    c(0xBF4A, None, "HANGUL SYLLABLE BBOLM", 0x31, "Hangul"),
    c(0xBF4B, None, "HANGUL SYLLABLE BBOLB", 0x31, "Hangul"),
    c(0xBF4C, None, "HANGUL SYLLABLE BBOLS", 0x31, "Hangul"),
    c(0xBF4D, None, "HANGUL SYLLABLE BBOLT", 0x31, "Hangul"),
    c(0xBF4E, None, "HANGUL SYLLABLE BBOLP", 0x31, "Hangul"),
    c(0xBF4F, None, "HANGUL SYLLABLE BBOLH", 0x31, "Hangul"),
    c(0xBF50, None, "HANGUL SYLLABLE BBOM", 0x31, "Hangul"),
    c(0xBF51, None, "HANGUL SYLLABLE BBOB", 0x31, "Hangul"),
    c(0xBF52, None, "HANGUL SYLLABLE BBOBS", 0x31, "Hangul"),
    c(0xBF53, None, "HANGUL SYLLABLE BBOS", 0x31, "Hangul"),
    c(0xBF54, None, "HANGUL SYLLABLE BBOSS", 0x31, "Hangul"),
    c(0xBF55, None, "HANGUL SYLLABLE BBONG", 0x31, "Hangul"),
    c(0xBF56, None, "HANGUL SYLLABLE BBOJ", 0x31, "Hangul"),
    c(0xBF57, None, "HANGUL SYLLABLE BBOC", 0x31, "Hangul"),
    c(0xBF58, None, "HANGUL SYLLABLE BBOK", 0x31, "Hangul"),
    c(0xBF59, None, "HANGUL SYLLABLE BBOT", 0x31, "Hangul"),
    c(0xBF5A, None, "HANGUL SYLLABLE BBOP", 0x31, "Hangul"),
    c(0xBF5B, None, "HANGUL SYLLABLE BBOH", 0x31, "Hangul"),
    c(0xBF5C, None, "HANGUL SYLLABLE BBWA", 0x31, "Hangul"),
    c(0xBF5D, None, "HANGUL SYLLABLE BBWAG", 0x31, "Hangul"),
    c(0xBF5E, None, "HANGUL SYLLABLE BBWAGG", 0x31, "Hangul"),
    c(0xBF5F, None, "HANGUL SYLLABLE BBWAGS", 0x31, "Hangul"),
    c(0xBF60, None, "HANGUL SYLLABLE BBWAN", 0x31, "Hangul"),
    c(0xBF61, None, "HANGUL SYLLABLE BBWANJ", 0x31, "Hangul"),
    c(0xBF62, None, "HANGUL SYLLABLE BBWANH", 0x31, "Hangul"),
    c(0xBF63, None, "HANGUL SYLLABLE BBWAD", 0x31, "Hangul"),
    c(0xBF64, None, "HANGUL SYLLABLE BBWAL", 0x31, "Hangul"),
    c(0xBF65, None, "HANGUL SYLLABLE BBWALG", 0x31, "Hangul"),
    c(0xBF66, None, "HANGUL SYLLABLE BBWALM", 0x31, "Hangul"),
    c(0xBF67, None, "HANGUL SYLLABLE BBWALB", 0x31, "Hangul"),
    c(0xBF68, None, "HANGUL SYLLABLE BBWALS", 0x31, "Hangul"),
    c(0xBF69, None, "HANGUL SYLLABLE BBWALT", 0x31, "Hangul"),
    c(0xBF6A, None, "HANGUL SYLLABLE BBWALP", 0x31, "Hangul"),
    c(0xBF6B, None, "HANGUL SYLLABLE BBWALH", 0x31, "Hangul"),
    c(0xBF6C, None, "HANGUL SYLLABLE BBWAM", 0x31, "Hangul"),
    c(0xBF6D, None, "HANGUL SYLLABLE BBWAB", 0x31, "Hangul"),
    c(0xBF6E, None, "HANGUL SYLLABLE BBWABS", 0x31, "Hangul"),
    c(0xBF6F, None, "HANGUL SYLLABLE BBWAS", 0x31, "Hangul"),
    c(0xBF70, None, "HANGUL SYLLABLE BBWASS", 0x31, "Hangul"),
    c(0xBF71, None, "HANGUL SYLLABLE BBWANG", 0x31, "Hangul"),
    c(0xBF72, None, "HANGUL SYLLABLE BBWAJ", 0x31, "Hangul"),
    c(0xBF73, None, "HANGUL SYLLABLE BBWAC", 0x31, "Hangul"),
    c(0xBF74, None, "HANGUL SYLLABLE BBWAK", 0x31, "Hangul"),
    c(0xBF75, None, "HANGUL SYLLABLE BBWAT", 0x31, "Hangul"),
    c(0xBF76, None, "HANGUL SYLLABLE BBWAP", 0x31, "Hangul"),
    c(0xBF77, None, "HANGUL SYLLABLE BBWAH", 0x31, "Hangul"),
    c(0xBF78, None, "HANGUL SYLLABLE BBWAE", 0x31, "Hangul"),
    c(0xBF79, None, "HANGUL SYLLABLE BBWAEG", 0x31, "Hangul"),
    c(0xBF7A, None, "HANGUL SYLLABLE BBWAEGG", 0x31, "Hangul"),
    c(0xBF7B, None, "HANGUL SYLLABLE BBWAEGS", 0x31, "Hangul"),
    c(0xBF7C, None, "HANGUL SYLLABLE BBWAEN", 0x31, "Hangul"),
    c(0xBF7D, None, "HANGUL SYLLABLE BBWAENJ", 0x31, "Hangul"),
    c(0xBF7E, None, "HANGUL SYLLABLE BBWAENH", 0x31, "Hangul"),
    c(0xBF7F, None, "HANGUL SYLLABLE BBWAED", 0x31, "Hangul"),
    c(0xBF80, None, "HANGUL SYLLABLE BBWAEL", 0x31, "Hangul"),
    c(0xBF81, None, "HANGUL SYLLABLE BBWAELG", 0x31, "Hangul"),
    c(0xBF82, None, "HANGUL SYLLABLE BBWAELM", 0x31, "Hangul"),
    c(0xBF83, None, "HANGUL SYLLABLE BBWAELB", 0x31, "Hangul"),
    c(0xBF84, None, "HANGUL SYLLABLE BBWAELS", 0x31, "Hangul"),
    c(0xBF85, None, "HANGUL SYLLABLE BBWAELT", 0x31, "Hangul"),
    c(0xBF86, None, "HANGUL SYLLABLE BBWAELP", 0x31, "Hangul"),
    c(0xBF87, None, "HANGUL SYLLABLE BBWAELH", 0x31, "Hangul"),
    c(0xBF88, None, "HANGUL SYLLABLE BBWAEM", 0x31, "Hangul"),
    c(0xBF89, None, "HANGUL SYLLABLE BBWAEB", 0x31, "Hangul"),
    c(0xBF8A, None, "HANGUL SYLLABLE BBWAEBS", 0x31, "Hangul"),
    c(0xBF8B, None, "HANGUL SYLLABLE BBWAES", 0x31, "Hangul"),
    c(0xBF8C, None, "HANGUL SYLLABLE BBWAESS", 0x31, "Hangul"),
    c(0xBF8D, None, "HANGUL SYLLABLE BBWAENG", 0x31, "Hangul"),
    c(0xBF8E, None, "HANGUL SYLLABLE BBWAEJ", 0x31, "Hangul"),
    c(0xBF8F, None, "HANGUL SYLLABLE BBWAEC", 0x31, "Hangul"),
    c(0xBF90, None, "HANGUL SYLLABLE BBWAEK", 0x31, "Hangul"),
    c(0xBF91, None, "HANGUL SYLLABLE BBWAET", 0x31, "Hangul"),
    c(0xBF92, None, "HANGUL SYLLABLE BBWAEP", 0x31, "Hangul"),
    c(0xBF93, None, "HANGUL SYLLABLE BBWAEH", 0x31, "Hangul"),
    c(0xBF94, None, "HANGUL SYLLABLE BBOE", 0x31, "Hangul"),
    c(0xBF95, None, "HANGUL SYLLABLE BBOEG", 0x31, "Hangul"),
    c(0xBF96, None, "HANGUL SYLLABLE BBOEGG", 0x31, "Hangul"),
    c(0xBF97, None, "HANGUL SYLLABLE BBOEGS", 0x31, "Hangul"),
    c(0xBF98, None, "HANGUL SYLLABLE BBOEN", 0x31, "Hangul"),
    c(0xBF99, None, "HANGUL SYLLABLE BBOENJ", 0x31, "Hangul"),
    c(0xBF9A, None, "HANGUL SYLLABLE BBOENH", 0x31, "Hangul"),
    c(0xBF9B, None, "HANGUL SYLLABLE BBOED", 0x31, "Hangul"),
    c(0xBF9C, None, "HANGUL SYLLABLE BBOEL", 0x31, "Hangul"),
    c(0xBF9D, None, "HANGUL SYLLABLE BBOELG", 0x31, "Hangul"),
    c(0xBF9E, None, "HANGUL SYLLABLE BBOELM", 0x31, "Hangul"),
    c(0xBF9F, None, "HANGUL SYLLABLE BBOELB", 0x31, "Hangul"),
    c(0xBFA0, None, "HANGUL SYLLABLE BBOELS", 0x31, "Hangul"),
    c(0xBFA1, None, "HANGUL SYLLABLE BBOELT", 0x31, "Hangul"),
    c(0xBFA2, None, "HANGUL SYLLABLE BBOELP", 0x31, "Hangul"),
    c(0xBFA3, None, "HANGUL SYLLABLE BBOELH", 0x31, "Hangul"),
    c(0xBFA4, None, "HANGUL SYLLABLE BBOEM", 0x31, "Hangul"),
    c(0xBFA5, None, "HANGUL SYLLABLE BBOEB", 0x31, "Hangul"),
    c(0xBFA6, None, "HANGUL SYLLABLE BBOEBS", 0x31, "Hangul"),
    c(0xBFA7, None, "HANGUL SYLLABLE BBOES", 0x31, "Hangul"),
    c(0xBFA8, None, "HANGUL SYLLABLE BBOESS", 0x31, "Hangul"),
    c(0xBFA9, None, "HANGUL SYLLABLE BBOENG", 0x31, "Hangul"),
    c(0xBFAA, None, "HANGUL SYLLABLE BBOEJ", 0x31, "Hangul"),
    c(0xBFAB, None, "HANGUL SYLLABLE BBOEC", 0x31, "Hangul"),
    c(0xBFAC, None, "HANGUL SYLLABLE BBOEK", 0x31, "Hangul"),
    c(0xBFAD, None, "HANGUL SYLLABLE BBOET", 0x31, "Hangul"),
    c(0xBFAE, None, "HANGUL SYLLABLE BBOEP", 0x31, "Hangul"),
    c(0xBFAF, None, "HANGUL SYLLABLE BBOEH", 0x31, "Hangul"),
    c(0xBFB0, None, "HANGUL SYLLABLE BBYO", 0x31, "Hangul"),
    c(0xBFB1, None, "HANGUL SYLLABLE BBYOG", 0x31, "Hangul"),
    c(0xBFB2, None, "HANGUL SYLLABLE BBYOGG", 0x31, "Hangul"),
    c(0xBFB3, None, "HANGUL SYLLABLE BBYOGS", 0x31, "Hangul"),
    c(0xBFB4, None, "HANGUL SYLLABLE BBYON", 0x31, "Hangul"),
    c(0xBFB5, None, "HANGUL SYLLABLE BBYONJ", 0x31, "Hangul"),
    c(0xBFB6, None, "HANGUL SYLLABLE BBYONH", 0x31, "Hangul"),
    c(0xBFB7, None, "HANGUL SYLLABLE BBYOD", 0x31, "Hangul"),
    c(0xBFB8, None, "HANGUL SYLLABLE BBYOL", 0x31, "Hangul"),
    c(0xBFB9, None, "HANGUL SYLLABLE BBYOLG", 0x31, "Hangul"),
    c(0xBFBA, None, "HANGUL SYLLABLE BBYOLM", 0x31, "Hangul"),
    c(0xBFBB, None, "HANGUL SYLLABLE BBYOLB", 0x31, "Hangul"),
    c(0xBFBC, None, "HANGUL SYLLABLE BBYOLS", 0x31, "Hangul"),
    c(0xBFBD, None, "HANGUL SYLLABLE BBYOLT", 0x31, "Hangul"),
    c(0xBFBE, None, "HANGUL SYLLABLE BBYOLP", 0x31, "Hangul"),
    c(0xBFBF, None, "HANGUL SYLLABLE BBYOLH", 0x31, "Hangul"),
    c(0xBFC0, None, "HANGUL SYLLABLE BBYOM", 0x31, "Hangul"),
    c(0xBFC1, None, "HANGUL SYLLABLE BBYOB", 0x31, "Hangul"),
    c(0xBFC2, None, "HANGUL SYLLABLE BBYOBS", 0x31, "Hangul"),
    c(0xBFC3, None, "HANGUL SYLLABLE BBYOS", 0x31, "Hangul"),
    c(0xBFC4, None, "HANGUL SYLLABLE BBYOSS", 0x31, "Hangul"),
    c(0xBFC5, None, "HANGUL SYLLABLE BBYONG", 0x31, "Hangul"),
    c(0xBFC6, None, "HANGUL SYLLABLE BBYOJ", 0x31, "Hangul"),
    c(0xBFC7, None, "HANGUL SYLLABLE BBYOC", 0x31, "Hangul"),
    c(0xBFC8, None, "HANGUL SYLLABLE BBYOK", 0x31, "Hangul"),
    c(0xBFC9, None, "HANGUL SYLLABLE BBYOT", 0x31, "Hangul"),
    c(0xBFCA, None, "HANGUL SYLLABLE BBYOP", 0x31, "Hangul"),
    c(0xBFCB, None, "HANGUL SYLLABLE BBYOH", 0x31, "Hangul"),
    c(0xBFCC, None, "HANGUL SYLLABLE BBU", 0x31, "Hangul"),
    c(0xBFCD, None, "HANGUL SYLLABLE BBUG", 0x31, "Hangul"),
    c(0xBFCE, None, "HANGUL SYLLABLE BBUGG", 0x31, "Hangul"),
    c(0xBFCF, None, "HANGUL SYLLABLE BBUGS", 0x31, "Hangul"),
    c(0xBFD0, None, "HANGUL SYLLABLE BBUN", 0x31, "Hangul"),
    c(0xBFD1, None, "HANGUL SYLLABLE BBUNJ", 0x31, "Hangul"),
    c(0xBFD2, None, "HANGUL SYLLABLE BBUNH", 0x31, "Hangul"),
    c(0xBFD3, None, "HANGUL SYLLABLE BBUD", 0x31, "Hangul"),
    c(0xBFD4, None, "HANGUL SYLLABLE BBUL", 0x31, "Hangul"),
    c(0xBFD5, None, "HANGUL SYLLABLE BBULG", 0x31, "Hangul"),
    c(0xBFD6, None, "HANGUL SYLLABLE BBULM", 0x31, "Hangul"),
    c(0xBFD7, None, "HANGUL SYLLABLE BBULB", 0x31, "Hangul"),
    c(0xBFD8, None, "HANGUL SYLLABLE BBULS", 0x31, "Hangul"),
    c(0xBFD9, None, "HANGUL SYLLABLE BBULT", 0x31, "Hangul"),
    c(0xBFDA, None, "HANGUL SYLLABLE BBULP", 0x31, "Hangul"),
    c(0xBFDB, None, "HANGUL SYLLABLE BBULH", 0x31, "Hangul"),
    c(0xBFDC, None, "HANGUL SYLLABLE BBUM", 0x31, "Hangul"),
    c(0xBFDD, None, "HANGUL SYLLABLE BBUB", 0x31, "Hangul"),
    c(0xBFDE, None, "HANGUL SYLLABLE BBUBS", 0x31, "Hangul"),
    c(0xBFDF, None, "HANGUL SYLLABLE BBUS", 0x31, "Hangul"),
    c(0xBFE0, None, "HANGUL SYLLABLE BBUSS", 0x31, "Hangul"),
    c(0xBFE1, None, "HANGUL SYLLABLE BBUNG", 0x31, "Hangul"),
    c(0xBFE2, None, "HANGUL SYLLABLE BBUJ", 0x31, "Hangul"),
    c(0xBFE3, None, "HANGUL SYLLABLE BBUC", 0x31, "Hangul"),
    c(0xBFE4, None, "HANGUL SYLLABLE BBUK", 0x31, "Hangul"),
    c(0xBFE5, None, "HANGUL SYLLABLE BBUT", 0x31, "Hangul"),
    c(0xBFE6, None, "HANGUL SYLLABLE BBUP", 0x31, "Hangul"),
    c(0xBFE7, None, "HANGUL SYLLABLE BBUH", 0x31, "Hangul"),
    c(0xBFE8, None, "HANGUL SYLLABLE BBWEO", 0x31, "Hangul"),
    c(0xBFE9, None, "HANGUL SYLLABLE BBWEOG", 0x31, "Hangul"),
    c(0xBFEA, None, "HANGUL SYLLABLE BBWEOGG", 0x31, "Hangul"),
    c(0xBFEB, None, "HANGUL SYLLABLE BBWEOGS", 0x31, "Hangul"),
    c(0xBFEC, None, "HANGUL SYLLABLE BBWEON", 0x31, "Hangul"),
    c(0xBFED, None, "HANGUL SYLLABLE BBWEONJ", 0x31, "Hangul"),
    c(0xBFEE, None, "HANGUL SYLLABLE BBWEONH", 0x31, "Hangul"),
    c(0xBFEF, None, "HANGUL SYLLABLE BBWEOD", 0x31, "Hangul"),
    c(0xBFF0, None, "HANGUL SYLLABLE BBWEOL", 0x31, "Hangul"),
    c(0xBFF1, None, "HANGUL SYLLABLE BBWEOLG", 0x31, "Hangul"),
    c(0xBFF2, None, "HANGUL SYLLABLE BBWEOLM", 0x31, "Hangul"),
    c(0xBFF3, None, "HANGUL SYLLABLE BBWEOLB", 0x31, "Hangul"),
    c(0xBFF4, None, "HANGUL SYLLABLE BBWEOLS", 0x31, "Hangul"),
    c(0xBFF5, None, "HANGUL SYLLABLE BBWEOLT", 0x31, "Hangul"),
    c(0xBFF6, None, "HANGUL SYLLABLE BBWEOLP", 0x31, "Hangul"),
    c(0xBFF7, None, "HANGUL SYLLABLE BBWEOLH", 0x31, "Hangul"),
    c(0xBFF8, None, "HANGUL SYLLABLE BBWEOM", 0x31, "Hangul"),
    c(0xBFF9, None, "HANGUL SYLLABLE BBWEOB", 0x31, "Hangul"),
    c(0xBFFA, None, "HANGUL SYLLABLE BBWEOBS", 0x31, "Hangul"),
    c(0xBFFB, None, "HANGUL SYLLABLE BBWEOS", 0x31, "Hangul"),
    c(0xBFFC, None, "HANGUL SYLLABLE BBWEOSS", 0x31, "Hangul"),
    c(0xBFFD, None, "HANGUL SYLLABLE BBWEONG", 0x31, "Hangul"),
    c(0xBFFE, None, "HANGUL SYLLABLE BBWEOJ", 0x31, "Hangul"),
    c(0xBFFF, None, "HANGUL SYLLABLE BBWEOC", 0x31, "Hangul"),
    c(0xC000, None, "HANGUL SYLLABLE BBWEOK", 0x31, "Hangul"),
    c(0xC001, None, "HANGUL SYLLABLE BBWEOT", 0x31, "Hangul"),
    c(0xC002, None, "HANGUL SYLLABLE BBWEOP", 0x31, "Hangul"),
    c(0xC003, None, "HANGUL SYLLABLE BBWEOH", 0x31, "Hangul"),
    c(0xC004, None, "HANGUL SYLLABLE BBWE", 0x31, "Hangul"),
    c(0xC005, None, "HANGUL SYLLABLE BBWEG", 0x31, "Hangul"),
    c(0xC006, None, "HANGUL SYLLABLE BBWEGG", 0x31, "Hangul"),
    c(0xC007, None, "HANGUL SYLLABLE BBWEGS", 0x31, "Hangul"),
    c(0xC008, None, "HANGUL SYLLABLE BBWEN", 0x31, "Hangul"),
    c(0xC009, None, "HANGUL SYLLABLE BBWENJ", 0x31, "Hangul"),
    c(0xC00A, None, "HANGUL SYLLABLE BBWENH", 0x31, "Hangul"),
    c(0xC00B, None, "HANGUL SYLLABLE BBWED", 0x31, "Hangul"),
    c(0xC00C, None, "HANGUL SYLLABLE BBWEL", 0x31, "Hangul"),
    c(0xC00D, None, "HANGUL SYLLABLE BBWELG", 0x31, "Hangul"),
    c(0xC00E, None, "HANGUL SYLLABLE BBWELM", 0x31, "Hangul"),
    c(0xC00F, None, "HANGUL SYLLABLE BBWELB", 0x31, "Hangul"),
    c(0xC010, None, "HANGUL SYLLABLE BBWELS", 0x31, "Hangul"),
    c(0xC011, None, "HANGUL SYLLABLE BBWELT", 0x31, "Hangul"),
    c(0xC012, None, "HANGUL SYLLABLE BBWELP", 0x31, "Hangul"),
    c(0xC013, None, "HANGUL SYLLABLE BBWELH", 0x31, "Hangul"),
    c(0xC014, None, "HANGUL SYLLABLE BBWEM", 0x31, "Hangul"),
    c(0xC015, None, "HANGUL SYLLABLE BBWEB", 0x31, "Hangul"),
    c(0xC016, None, "HANGUL SYLLABLE BBWEBS", 0x31, "Hangul"),
    c(0xC017, None, "HANGUL SYLLABLE BBWES", 0x31, "Hangul"),
    c(0xC018, None, "HANGUL SYLLABLE BBWESS", 0x31, "Hangul"),
    c(0xC019, None, "HANGUL SYLLABLE BBWENG", 0x31, "Hangul"),
    c(0xC01A, None, "HANGUL SYLLABLE BBWEJ", 0x31, "Hangul"),
    c(0xC01B, None, "HANGUL SYLLABLE BBWEC", 0x31, "Hangul"),
    c(0xC01C, None, "HANGUL SYLLABLE BBWEK", 0x31, "Hangul"),
    c(0xC01D, None, "HANGUL SYLLABLE BBWET", 0x31, "Hangul"),
    c(0xC01E, None, "HANGUL SYLLABLE BBWEP", 0x31, "Hangul"),
    c(0xC01F, None, "HANGUL SYLLABLE BBWEH", 0x31, "Hangul"),
    c(0xC020, None, "HANGUL SYLLABLE BBWI", 0x31, "Hangul"),
    c(0xC021, None, "HANGUL SYLLABLE BBWIG", 0x31, "Hangul"),
    c(0xC022, None, "HANGUL SYLLABLE BBWIGG", 0x31, "Hangul"),
    c(0xC023, None, "HANGUL SYLLABLE BBWIGS", 0x31, "Hangul"),
    c(0xC024, None, "HANGUL SYLLABLE BBWIN", 0x31, "Hangul"),
    c(0xC025, None, "HANGUL SYLLABLE BBWINJ", 0x31, "Hangul"),
    c(0xC026, None, "HANGUL SYLLABLE BBWINH", 0x31, "Hangul"),
    c(0xC027, None, "HANGUL SYLLABLE BBWID", 0x31, "Hangul"),
    c(0xC028, None, "HANGUL SYLLABLE BBWIL", 0x31, "Hangul"),
    c(0xC029, None, "HANGUL SYLLABLE BBWILG", 0x31, "Hangul"),
    c(0xC02A, None, "HANGUL SYLLABLE BBWILM", 0x31, "Hangul"),
    c(0xC02B, None, "HANGUL SYLLABLE BBWILB", 0x31, "Hangul"),
    c(0xC02C, None, "HANGUL SYLLABLE BBWILS", 0x31, "Hangul"),
    c(0xC02D, None, "HANGUL SYLLABLE BBWILT", 0x31, "Hangul"),
    c(0xC02E, None, "HANGUL SYLLABLE BBWILP", 0x31, "Hangul"),
    c(0xC02F, None, "HANGUL SYLLABLE BBWILH", 0x31, "Hangul"),
    c(0xC030, None, "HANGUL SYLLABLE BBWIM", 0x31, "Hangul"),
    c(0xC031, None, "HANGUL SYLLABLE BBWIB", 0x31, "Hangul"),
    c(0xC032, None, "HANGUL SYLLABLE BBWIBS", 0x31, "Hangul"),
    c(0xC033, None, "HANGUL SYLLABLE BBWIS", 0x31, "Hangul"),
    c(0xC034, None, "HANGUL SYLLABLE BBWISS", 0x31, "Hangul"),
    c(0xC035, None, "HANGUL SYLLABLE BBWING", 0x31, "Hangul"),
    c(0xC036, None, "HANGUL SYLLABLE BBWIJ", 0x31, "Hangul"),
    c(0xC037, None, "HANGUL SYLLABLE BBWIC", 0x31, "Hangul"),
    c(0xC038, None, "HANGUL SYLLABLE BBWIK", 0x31, "Hangul"),
    c(0xC039, None, "HANGUL SYLLABLE BBWIT", 0x31, "Hangul"),
    c(0xC03A, None, "HANGUL SYLLABLE BBWIP", 0x31, "Hangul"),
    c(0xC03B, None, "HANGUL SYLLABLE BBWIH", 0x31, "Hangul"),
    c(0xC03C, None, "HANGUL SYLLABLE BBYU", 0x31, "Hangul"),
    c(0xC03D, None, "HANGUL SYLLABLE BBYUG", 0x31, "Hangul"),
    c(0xC03E, None, "HANGUL SYLLABLE BBYUGG", 0x31, "Hangul"),
    c(0xC03F, None, "HANGUL SYLLABLE BBYUGS", 0x31, "Hangul"),
    c(0xC040, None, "HANGUL SYLLABLE BBYUN", 0x31, "Hangul"),
    c(0xC041, None, "HANGUL SYLLABLE BBYUNJ", 0x31, "Hangul"),
    c(0xC042, None, "HANGUL SYLLABLE BBYUNH", 0x31, "Hangul"),
    c(0xC043, None, "HANGUL SYLLABLE BBYUD", 0x31, "Hangul"),
    c(0xC044, None, "HANGUL SYLLABLE BBYUL", 0x31, "Hangul"),
    c(0xC045, None, "HANGUL SYLLABLE BBYULG", 0x31, "Hangul"),
    c(0xC046, None, "HANGUL SYLLABLE BBYULM", 0x31, "Hangul"),
    c(0xC047, None, "HANGUL SYLLABLE BBYULB", 0x31, "Hangul"),
    c(0xC048, None, "HANGUL SYLLABLE BBYULS", 0x31, "Hangul"),
    c(0xC049, None, "HANGUL SYLLABLE BBYULT", 0x31, "Hangul"),
    c(0xC04A, None, "HANGUL SYLLABLE BBYULP", 0x31, "Hangul"),
    c(0xC04B, None, "HANGUL SYLLABLE BBYULH", 0x31, "Hangul"),
    c(0xC04C, None, "HANGUL SYLLABLE BBYUM", 0x31, "Hangul"),
    c(0xC04D, None, "HANGUL SYLLABLE BBYUB", 0x31, "Hangul"),
    c(0xC04E, None, "HANGUL SYLLABLE BBYUBS", 0x31, "Hangul"),
    c(0xC04F, None, "HANGUL SYLLABLE BBYUS", 0x31, "Hangul"),
    c(0xC050, None, "HANGUL SYLLABLE BBYUSS", 0x31, "Hangul"),
    c(0xC051, None, "HANGUL SYLLABLE BBYUNG", 0x31, "Hangul"),
    c(0xC052, None, "HANGUL SYLLABLE BBYUJ", 0x31, "Hangul"),
    c(0xC053, None, "HANGUL SYLLABLE BBYUC", 0x31, "Hangul"),
    c(0xC054, None, "HANGUL SYLLABLE BBYUK", 0x31, "Hangul"),
    c(0xC055, None, "HANGUL SYLLABLE BBYUT", 0x31, "Hangul"),
    c(0xC056, None, "HANGUL SYLLABLE BBYUP", 0x31, "Hangul"),
    c(0xC057, None, "HANGUL SYLLABLE BBYUH", 0x31, "Hangul"),
    c(0xC058, None, "HANGUL SYLLABLE BBEU", 0x31, "Hangul"),
    c(0xC059, None, "HANGUL SYLLABLE BBEUG", 0x31, "Hangul"),
    c(0xC05A, None, "HANGUL SYLLABLE BBEUGG", 0x31, "Hangul"),
    c(0xC05B, None, "HANGUL SYLLABLE BBEUGS", 0x31, "Hangul"),
    c(0xC05C, None, "HANGUL SYLLABLE BBEUN", 0x31, "Hangul"),
    c(0xC05D, None, "HANGUL SYLLABLE BBEUNJ", 0x31, "Hangul"),
    c(0xC05E, None, "HANGUL SYLLABLE BBEUNH", 0x31, "Hangul"),
    c(0xC05F, None, "HANGUL SYLLABLE BBEUD", 0x31, "Hangul"),
    c(0xC060, None, "HANGUL SYLLABLE BBEUL", 0x31, "Hangul"),
    c(0xC061, None, "HANGUL SYLLABLE BBEULG", 0x31, "Hangul"),
    c(0xC062, None, "HANGUL SYLLABLE BBEULM", 0x31, "Hangul"),
    c(0xC063, None, "HANGUL SYLLABLE BBEULB", 0x31, "Hangul"),
    c(0xC064, None, "HANGUL SYLLABLE BBEULS", 0x31, "Hangul"),
    c(0xC065, None, "HANGUL SYLLABLE BBEULT", 0x31, "Hangul"),
    c(0xC066, None, "HANGUL SYLLABLE BBEULP", 0x31, "Hangul"),
    c(0xC067, None, "HANGUL SYLLABLE BBEULH", 0x31, "Hangul"),
    c(0xC068, None, "HANGUL SYLLABLE BBEUM", 0x31, "Hangul"),
    c(0xC069, None, "HANGUL SYLLABLE BBEUB", 0x31, "Hangul"),
    c(0xC06A, None, "HANGUL SYLLABLE BBEUBS", 0x31, "Hangul"),
    c(0xC06B, None, "HANGUL SYLLABLE BBEUS", 0x31, "Hangul"),
    c(0xC06C, None, "HANGUL SYLLABLE BBEUSS", 0x31, "Hangul"),
    c(0xC06D, None, "HANGUL SYLLABLE BBEUNG", 0x31, "Hangul"),
    c(0xC06E, None, "HANGUL SYLLABLE BBEUJ", 0x31, "Hangul"),
    c(0xC06F, None, "HANGUL SYLLABLE BBEUC", 0x31, "Hangul"),
    c(0xC070, None, "HANGUL SYLLABLE BBEUK", 0x31, "Hangul"),
    c(0xC071, None, "HANGUL SYLLABLE BBEUT", 0x31, "Hangul"),
    c(0xC072, None, "HANGUL SYLLABLE BBEUP", 0x31, "Hangul"),
    c(0xC073, None, "HANGUL SYLLABLE BBEUH", 0x31, "Hangul"),
    c(0xC074, None, "HANGUL SYLLABLE BBYI", 0x31, "Hangul"),
    c(0xC075, None, "HANGUL SYLLABLE BBYIG", 0x31, "Hangul"),
    c(0xC076, None, "HANGUL SYLLABLE BBYIGG", 0x31, "Hangul"),
    c(0xC077, None, "HANGUL SYLLABLE BBYIGS", 0x31, "Hangul"),
    c(0xC078, None, "HANGUL SYLLABLE BBYIN", 0x31, "Hangul"),
    c(0xC079, None, "HANGUL SYLLABLE BBYINJ", 0x31, "Hangul"),
    c(0xC07A, None, "HANGUL SYLLABLE BBYINH", 0x31, "Hangul"),
    c(0xC07B, None, "HANGUL SYLLABLE BBYID", 0x31, "Hangul"),
    c(0xC07C, None, "HANGUL SYLLABLE BBYIL", 0x31, "Hangul"),
    c(0xC07D, None, "HANGUL SYLLABLE BBYILG", 0x31, "Hangul"),
    c(0xC07E, None, "HANGUL SYLLABLE BBYILM", 0x31, "Hangul"),
    c(0xC07F, None, "HANGUL SYLLABLE BBYILB", 0x31, "Hangul"),
    c(0xC080, None, "HANGUL SYLLABLE BBYILS", 0x31, "Hangul"),
    c(0xC081, None, "HANGUL SYLLABLE BBYILT", 0x31, "Hangul"),
    c(0xC082, None, "HANGUL SYLLABLE BBYILP", 0x31, "Hangul"),
    c(0xC083, None, "HANGUL SYLLABLE BBYILH", 0x31, "Hangul"),
    c(0xC084, None, "HANGUL SYLLABLE BBYIM", 0x31, "Hangul"),
    c(0xC085, None, "HANGUL SYLLABLE BBYIB", 0x31, "Hangul"),
    c(0xC086, None, "HANGUL SYLLABLE BBYIBS", 0x31, "Hangul"),
    c(0xC087, None, "HANGUL SYLLABLE BBYIS", 0x31, "Hangul"),
    c(0xC088, None, "HANGUL SYLLABLE BBYISS", 0x31, "Hangul"),
    c(0xC089, None, "HANGUL SYLLABLE BBYING", 0x31, "Hangul"),
    c(0xC08A, None, "HANGUL SYLLABLE BBYIJ", 0x31, "Hangul"),
    c(0xC08B, None, "HANGUL SYLLABLE BBYIC", 0x31, "Hangul"),
    c(0xC08C, None, "HANGUL SYLLABLE BBYIK", 0x31, "Hangul"),
    c(0xC08D, None, "HANGUL SYLLABLE BBYIT", 0x31, "Hangul"),
    c(0xC08E, None, "HANGUL SYLLABLE BBYIP", 0x31, "Hangul"),
    c(0xC08F, None, "HANGUL SYLLABLE BBYIH", 0x31, "Hangul"),
    c(0xC090, None, "HANGUL SYLLABLE BBI", 0x31, "Hangul"),
    c(0xC091, None, "HANGUL SYLLABLE BBIG", 0x31, "Hangul"),
    c(0xC092, None, "HANGUL SYLLABLE BBIGG", 0x31, "Hangul"),
    c(0xC093, None, "HANGUL SYLLABLE BBIGS", 0x31, "Hangul"),
    c(0xC094, None, "HANGUL SYLLABLE BBIN", 0x31, "Hangul"),
    c(0xC095, None, "HANGUL SYLLABLE BBINJ", 0x31, "Hangul"),
    c(0xC096, None, "HANGUL SYLLABLE BBINH", 0x31, "Hangul"),
    c(0xC097, None, "HANGUL SYLLABLE BBID", 0x31, "Hangul"),
    c(0xC098, None, "HANGUL SYLLABLE BBIL", 0x31, "Hangul"),
    c(0xC099, None, "HANGUL SYLLABLE BBILG", 0x31, "Hangul"),
    c(0xC09A, None, "HANGUL SYLLABLE BBILM", 0x31, "Hangul"),
    c(0xC09B, None, "HANGUL SYLLABLE BBILB", 0x31, "Hangul"),
    c(0xC09C, None, "HANGUL SYLLABLE BBILS", 0x31, "Hangul"),
    c(0xC09D, None, "HANGUL SYLLABLE BBILT", 0x31, "Hangul"),
    c(0xC09E, None, "HANGUL SYLLABLE BBILP", 0x31, "Hangul"),
    c(0xC09F, None, "HANGUL SYLLABLE BBILH", 0x31, "Hangul"),
    c(0xC0A0, None, "HANGUL SYLLABLE BBIM", 0x31, "Hangul"),
    c(0xC0A1, None, "HANGUL SYLLABLE BBIB", 0x31, "Hangul"),
    c(0xC0A2, None, "HANGUL SYLLABLE BBIBS", 0x31, "Hangul"),
    c(0xC0A3, None, "HANGUL SYLLABLE BBIS", 0x31, "Hangul"),
    c(0xC0A4, None, "HANGUL SYLLABLE BBISS", 0x31, "Hangul"),
    c(0xC0A5, None, "HANGUL SYLLABLE BBING", 0x31, "Hangul"),
    c(0xC0A6, None, "HANGUL SYLLABLE BBIJ", 0x31, "Hangul"),
    c(0xC0A7, None, "HANGUL SYLLABLE BBIC", 0x31, "Hangul"),
    c(0xC0A8, None, "HANGUL SYLLABLE BBIK", 0x31, "Hangul"),
    c(0xC0A9, None, "HANGUL SYLLABLE BBIT", 0x31, "Hangul"),
    c(0xC0AA, None, "HANGUL SYLLABLE BBIP", 0x31, "Hangul"),
    c(0xC0AB, None, "HANGUL SYLLABLE BBIH", 0x31, "Hangul"),
    c(0xC0AC, None, "HANGUL SYLLABLE SA", 0x31, "Hangul"),
    c(0xC0AD, None, "HANGUL SYLLABLE SAG", 0x31, "Hangul"),
    c(0xC0AE, None, "HANGUL SYLLABLE SAGG", 0x31, "Hangul"),
    c(0xC0AF, None, "HANGUL SYLLABLE SAGS", 0x31, "Hangul"),
    c(0xC0B0, None, "HANGUL SYLLABLE SAN", 0x31, "Hangul"),
    c(0xC0B1, None, "HANGUL SYLLABLE SANJ", 0x31, "Hangul"),
    c(0xC0B2, None, "HANGUL SYLLABLE SANH", 0x31, "Hangul"),
    c(0xC0B3, None, "HANGUL SYLLABLE SAD", 0x31, "Hangul"),
    c(0xC0B4, None, "HANGUL SYLLABLE SAL", 0x31, "Hangul"),
    c(0xC0B5, None, "HANGUL SYLLABLE SALG", 0x31, "Hangul"),
    c(0xC0B6, None, "HANGUL SYLLABLE SALM", 0x31, "Hangul"),
    c(0xC0B7, None, "HANGUL SYLLABLE SALB", 0x31, "Hangul"),
    c(0xC0B8, None, "HANGUL SYLLABLE SALS", 0x31, "Hangul"),
    c(0xC0B9, None, "HANGUL SYLLABLE SALT", 0x31, "Hangul"),
    c(0xC0BA, None, "HANGUL SYLLABLE SALP", 0x31, "Hangul"),
    c(0xC0BB, None, "HANGUL SYLLABLE SALH", 0x31, "Hangul"),
    c(0xC0BC, None, "HANGUL SYLLABLE SAM", 0x31, "Hangul"),
    c(0xC0BD, None, "HANGUL SYLLABLE SAB", 0x31, "Hangul"),
    c(0xC0BE, None, "HANGUL SYLLABLE SABS", 0x31, "Hangul"),
    c(0xC0BF, None, "HANGUL SYLLABLE SAS", 0x31, "Hangul"),
    c(0xC0C0, None, "HANGUL SYLLABLE SASS", 0x31, "Hangul"),
    c(0xC0C1, None, "HANGUL SYLLABLE SANG", 0x31, "Hangul"),
    c(0xC0C2, None, "HANGUL SYLLABLE SAJ", 0x31, "Hangul"),
    c(0xC0C3, None, "HANGUL SYLLABLE SAC", 0x31, "Hangul"),
    c(0xC0C4, None, "HANGUL SYLLABLE SAK", 0x31, "Hangul"),
    c(0xC0C5, None, "HANGUL SYLLABLE SAT", 0x31, "Hangul"),
    c(0xC0C6, None, "HANGUL SYLLABLE SAP", 0x31, "Hangul"),
    c(0xC0C7, None, "HANGUL SYLLABLE SAH", 0x31, "Hangul"),
    c(0xC0C8, None, "HANGUL SYLLABLE SAE", 0x31, "Hangul"),
    c(0xC0C9, None, "HANGUL SYLLABLE SAEG", 0x31, "Hangul"),
    c(0xC0CA, None, "HANGUL SYLLABLE SAEGG", 0x31, "Hangul"),
    c(0xC0CB, None, "HANGUL SYLLABLE SAEGS", 0x31, "Hangul"),
    c(0xC0CC, None, "HANGUL SYLLABLE SAEN", 0x31, "Hangul"),
    c(0xC0CD, None, "HANGUL SYLLABLE SAENJ", 0x31, "Hangul"),
    c(0xC0CE, None, "HANGUL SYLLABLE SAENH", 0x31, "Hangul"),
    c(0xC0CF, None, "HANGUL SYLLABLE SAED", 0x31, "Hangul"),
    c(0xC0D0, None, "HANGUL SYLLABLE SAEL", 0x31, "Hangul"),
    c(0xC0D1, None, "HANGUL SYLLABLE SAELG", 0x31, "Hangul"),
    c(0xC0D2, None, "HANGUL SYLLABLE SAELM", 0x31, "Hangul"),
    c(0xC0D3, None, "HANGUL SYLLABLE SAELB", 0x31, "Hangul"),
    c(0xC0D4, None, "HANGUL SYLLABLE SAELS", 0x31, "Hangul"),
    c(0xC0D5, None, "HANGUL SYLLABLE SAELT", 0x31, "Hangul"),
    c(0xC0D6, None, "HANGUL SYLLABLE SAELP", 0x31, "Hangul"),
    c(0xC0D7, None, "HANGUL SYLLABLE SAELH", 0x31, "Hangul"),
    c(0xC0D8, None, "HANGUL SYLLABLE SAEM", 0x31, "Hangul"),
    c(0xC0D9, None, "HANGUL SYLLABLE SAEB", 0x31, "Hangul"),
    c(0xC0DA, None, "HANGUL SYLLABLE SAEBS", 0x31, "Hangul"),
    c(0xC0DB, None, "HANGUL SYLLABLE SAES", 0x31, "Hangul"),
    c(0xC0DC, None, "HANGUL SYLLABLE SAESS", 0x31, "Hangul"),
    c(0xC0DD, None, "HANGUL SYLLABLE SAENG", 0x31, "Hangul"),
    c(0xC0DE, None, "HANGUL SYLLABLE SAEJ", 0x31, "Hangul"),
    c(0xC0DF, None, "HANGUL SYLLABLE SAEC", 0x31, "Hangul"),
    c(0xC0E0, None, "HANGUL SYLLABLE SAEK", 0x31, "Hangul"),
    c(0xC0E1, None, "HANGUL SYLLABLE SAET", 0x31, "Hangul"),
    c(0xC0E2, None, "HANGUL SYLLABLE SAEP", 0x31, "Hangul"),
    c(0xC0E3, None, "HANGUL SYLLABLE SAEH", 0x31, "Hangul"),
    c(0xC0E4, None, "HANGUL SYLLABLE SYA", 0x31, "Hangul"),
    c(0xC0E5, None, "HANGUL SYLLABLE SYAG", 0x31, "Hangul"),
    c(0xC0E6, None, "HANGUL SYLLABLE SYAGG", 0x31, "Hangul"),
    c(0xC0E7, None, "HANGUL SYLLABLE SYAGS", 0x31, "Hangul"),
    c(0xC0E8, None, "HANGUL SYLLABLE SYAN", 0x31, "Hangul"),
    c(0xC0E9, None, "HANGUL SYLLABLE SYANJ", 0x31, "Hangul"),
    c(0xC0EA, None, "HANGUL SYLLABLE SYANH", 0x31, "Hangul"),
    c(0xC0EB, None, "HANGUL SYLLABLE SYAD", 0x31, "Hangul"),
    c(0xC0EC, None, "HANGUL SYLLABLE SYAL", 0x31, "Hangul"),
    c(0xC0ED, None, "HANGUL SYLLABLE SYALG", 0x31, "Hangul"),
    c(0xC0EE, None, "HANGUL SYLLABLE SYALM", 0x31, "Hangul"),
    c(0xC0EF, None, "HANGUL SYLLABLE SYALB", 0x31, "Hangul"),
    c(0xC0F0, None, "HANGUL SYLLABLE SYALS", 0x31, "Hangul"),
    c(0xC0F1, None, "HANGUL SYLLABLE SYALT", 0x31, "Hangul"),
    c(0xC0F2, None, "HANGUL SYLLABLE SYALP", 0x31, "Hangul"),
    c(0xC0F3, None, "HANGUL SYLLABLE SYALH", 0x31, "Hangul"),
    c(0xC0F4, None, "HANGUL SYLLABLE SYAM", 0x31, "Hangul"),
    c(0xC0F5, None, "HANGUL SYLLABLE SYAB", 0x31, "Hangul"),
    c(0xC0F6, None, "HANGUL SYLLABLE SYABS", 0x31, "Hangul"),
    c(0xC0F7, None, "HANGUL SYLLABLE SYAS", 0x31, "Hangul"),
    c(0xC0F8, None, "HANGUL SYLLABLE SYASS", 0x31, "Hangul"),
    c(0xC0F9, None, "HANGUL SYLLABLE SYANG", 0x31, "Hangul"),
    c(0xC0FA, None, "HANGUL SYLLABLE SYAJ", 0x31, "Hangul"),
    c(0xC0FB, None, "HANGUL SYLLABLE SYAC", 0x31, "Hangul"),
    c(0xC0FC, None, "HANGUL SYLLABLE SYAK", 0x31, "Hangul"),
    c(0xC0FD, None, "HANGUL SYLLABLE SYAT", 0x31, "Hangul"),
    c(0xC0FE, None, "HANGUL SYLLABLE SYAP", 0x31, "Hangul"),
    c(0xC0FF, None, "HANGUL SYLLABLE SYAH", 0x31, "Hangul"),
    c(0xC100, None, "HANGUL SYLLABLE SYAE", 0x31, "Hangul"),
    c(0xC101, None, "HANGUL SYLLABLE SYAEG", 0x31, "Hangul"),
    c(0xC102, None, "HANGUL SYLLABLE SYAEGG", 0x31, "Hangul"),
    c(0xC103, None, "HANGUL SYLLABLE SYAEGS", 0x31, "Hangul"),
    c(0xC104, None, "HANGUL SYLLABLE SYAEN", 0x31, "Hangul"),
    c(0xC105, None, "HANGUL SYLLABLE SYAENJ", 0x31, "Hangul"),
    c(0xC106, None, "HANGUL SYLLABLE SYAENH", 0x31, "Hangul"),
    c(0xC107, None, "HANGUL SYLLABLE SYAED", 0x31, "Hangul"),
    c(0xC108, None, "HANGUL SYLLABLE SYAEL", 0x31, "Hangul"),
    c(0xC109, None, "HANGUL SYLLABLE SYAELG", 0x31, "Hangul"),
    c(0xC10A, None, "HANGUL SYLLABLE SYAELM", 0x31, "Hangul"),
    c(0xC10B, None, "HANGUL SYLLABLE SYAELB", 0x31, "Hangul"),
    c(0xC10C, None, "HANGUL SYLLABLE SYAELS", 0x31, "Hangul"),
    c(0xC10D, None, "HANGUL SYLLABLE SYAELT", 0x31, "Hangul"),
    c(0xC10E, None, "HANGUL SYLLABLE SYAELP", 0x31, "Hangul"),
    c(0xC10F, None, "HANGUL SYLLABLE SYAELH", 0x31, "Hangul"),
    c(0xC110, None, "HANGUL SYLLABLE SYAEM", 0x31, "Hangul"),
    c(0xC111, None, "HANGUL SYLLABLE SYAEB", 0x31, "Hangul"),
    c(0xC112, None, "HANGUL SYLLABLE SYAEBS", 0x31, "Hangul"),
    c(0xC113, None, "HANGUL SYLLABLE SYAES", 0x31, "Hangul"),
    c(0xC114, None, "HANGUL SYLLABLE SYAESS", 0x31, "Hangul"),
    c(0xC115, None, "HANGUL SYLLABLE SYAENG", 0x31, "Hangul"),
    c(0xC116, None, "HANGUL SYLLABLE SYAEJ", 0x31, "Hangul"),
    c(0xC117, None, "HANGUL SYLLABLE SYAEC", 0x31, "Hangul"),
    c(0xC118, None, "HANGUL SYLLABLE SYAEK", 0x31, "Hangul"),
    c(0xC119, None, "HANGUL SYLLABLE SYAET", 0x31, "Hangul"),
    c(0xC11A, None, "HANGUL SYLLABLE SYAEP", 0x31, "Hangul"),
    c(0xC11B, None, "HANGUL SYLLABLE SYAEH", 0x31, "Hangul"),
    c(0xC11C, None, "HANGUL SYLLABLE SEO", 0x31, "Hangul"),
    c(0xC11D, None, "HANGUL SYLLABLE SEOG", 0x31, "Hangul"),
    c(0xC11E, None, "HANGUL SYLLABLE SEOGG", 0x31, "Hangul"),
    c(0xC11F, None, "HANGUL SYLLABLE SEOGS", 0x31, "Hangul"),
    c(0xC120, None, "HANGUL SYLLABLE SEON", 0x31, "Hangul"),
    c(0xC121, None, "HANGUL SYLLABLE SEONJ", 0x31, "Hangul"),
    c(0xC122, None, "HANGUL SYLLABLE SEONH", 0x31, "Hangul"),
    c(0xC123, None, "HANGUL SYLLABLE SEOD", 0x31, "Hangul"),
    c(0xC124, None, "HANGUL SYLLABLE SEOL", 0x31, "Hangul"),
    c(0xC125, None, "HANGUL SYLLABLE SEOLG", 0x31, "Hangul"),
    c(0xC126, None, "HANGUL SYLLABLE SEOLM", 0x31, "Hangul"),
    c(0xC127, None, "HANGUL SYLLABLE SEOLB", 0x31, "Hangul"),
    c(0xC128, None, "HANGUL SYLLABLE SEOLS", 0x31, "Hangul"),
    c(0xC129, None, "HANGUL SYLLABLE SEOLT", 0x31, "Hangul"),
    c(0xC12A, None, "HANGUL SYLLABLE SEOLP", 0x31, "Hangul"),
    c(0xC12B, None, "HANGUL SYLLABLE SEOLH", 0x31, "Hangul"),
    c(0xC12C, None, "HANGUL SYLLABLE SEOM", 0x31, "Hangul"),
    c(0xC12D, None, "HANGUL SYLLABLE SEOB", 0x31, "Hangul"),
    c(0xC12E, None, "HANGUL SYLLABLE SEOBS", 0x31, "Hangul"),
    c(0xC12F, None, "HANGUL SYLLABLE SEOS", 0x31, "Hangul"),
    c(0xC130, None, "HANGUL SYLLABLE SEOSS", 0x31, "Hangul"),
    c(0xC131, None, "HANGUL SYLLABLE SEONG", 0x31, "Hangul"),
    c(0xC132, None, "HANGUL SYLLABLE SEOJ", 0x31, "Hangul"),
    c(0xC133, None, "HANGUL SYLLABLE SEOC", 0x31, "Hangul"),
    c(0xC134, None, "HANGUL SYLLABLE SEOK", 0x31, "Hangul"),
    c(0xC135, None, "HANGUL SYLLABLE SEOT", 0x31, "Hangul"),
    c(0xC136, None, "HANGUL SYLLABLE SEOP", 0x31, "Hangul"),
    c(0xC137, None, "HANGUL SYLLABLE SEOH", 0x31, "Hangul"),
    c(0xC138, None, "HANGUL SYLLABLE SE", 0x31, "Hangul"),
    c(0xC139, None, "HANGUL SYLLABLE SEG", 0x31, "Hangul"),
    c(0xC13A, None, "HANGUL SYLLABLE SEGG", 0x31, "Hangul"),
    c(0xC13B, None, "HANGUL SYLLABLE SEGS", 0x31, "Hangul"),
    c(0xC13C, None, "HANGUL SYLLABLE SEN", 0x31, "Hangul"),
    c(0xC13D, None, "HANGUL SYLLABLE SENJ", 0x31, "Hangul"),
    c(0xC13E, None, "HANGUL SYLLABLE SENH", 0x31, "Hangul"),
    c(0xC13F, None, "HANGUL SYLLABLE SED", 0x31, "Hangul"),
    c(0xC140, None, "HANGUL SYLLABLE SEL", 0x31, "Hangul"),
    c(0xC141, None, "HANGUL SYLLABLE SELG", 0x31, "Hangul"),
    c(0xC142, None, "HANGUL SYLLABLE SELM", 0x31, "Hangul"),
    c(0xC143, None, "HANGUL SYLLABLE SELB", 0x31, "Hangul"),
    c(0xC144, None, "HANGUL SYLLABLE SELS", 0x31, "Hangul"),
    c(0xC145, None, "HANGUL SYLLABLE SELT", 0x31, "Hangul"),
    c(0xC146, None, "HANGUL SYLLABLE SELP", 0x31, "Hangul"),
    c(0xC147, None, "HANGUL SYLLABLE SELH", 0x31, "Hangul"),
    c(0xC148, None, "HANGUL SYLLABLE SEM", 0x31, "Hangul"),
    c(0xC149, None, "HANGUL SYLLABLE SEB", 0x31, "Hangul"),
    c(0xC14A, None, "HANGUL SYLLABLE SEBS", 0x31, "Hangul"),
    c(0xC14B, None, "HANGUL SYLLABLE SES", 0x31, "Hangul"),
    c(0xC14C, None, "HANGUL SYLLABLE SESS", 0x31, "Hangul"),
    c(0xC14D, None, "HANGUL SYLLABLE SENG", 0x31, "Hangul"),
    c(0xC14E, None, "HANGUL SYLLABLE SEJ", 0x31, "Hangul"),
    c(0xC14F, None, "HANGUL SYLLABLE SEC", 0x31, "Hangul"),
    c(0xC150, None, "HANGUL SYLLABLE SEK", 0x31, "Hangul"),
    c(0xC151, None, "HANGUL SYLLABLE SET", 0x31, "Hangul"),
    c(0xC152, None, "HANGUL SYLLABLE SEP", 0x31, "Hangul"),
    c(0xC153, None, "HANGUL SYLLABLE SEH", 0x31, "Hangul"),
    c(0xC154, None, "HANGUL SYLLABLE SYEO", 0x31, "Hangul"),
    c(0xC155, None, "HANGUL SYLLABLE SYEOG", 0x31, "Hangul"),
    c(0xC156, None, "HANGUL SYLLABLE SYEOGG", 0x31, "Hangul"),
    c(0xC157, None, "HANGUL SYLLABLE SYEOGS", 0x31, "Hangul"),
    c(0xC158, None, "HANGUL SYLLABLE SYEON", 0x31, "Hangul"),
    c(0xC159, None, "HANGUL SYLLABLE SYEONJ", 0x31, "Hangul"),
    c(0xC15A, None, "HANGUL SYLLABLE SYEONH", 0x31, "Hangul"),
    c(0xC15B, None, "HANGUL SYLLABLE SYEOD", 0x31, "Hangul"),
    c(0xC15C, None, "HANGUL SYLLABLE SYEOL", 0x31, "Hangul"),
    c(0xC15D, None, "HANGUL SYLLABLE SYEOLG", 0x31, "Hangul"),
    c(0xC15E, None, "HANGUL SYLLABLE SYEOLM", 0x31, "Hangul"),
    c(0xC15F, None, "HANGUL SYLLABLE SYEOLB", 0x31, "Hangul"),
    c(0xC160, None, "HANGUL SYLLABLE SYEOLS", 0x31, "Hangul"),
    c(0xC161, None, "HANGUL SYLLABLE SYEOLT", 0x31, "Hangul"),
    c(0xC162, None, "HANGUL SYLLABLE SYEOLP", 0x31, "Hangul"),
    c(0xC163, None, "HANGUL SYLLABLE SYEOLH", 0x31, "Hangul"),
    c(0xC164, None, "HANGUL SYLLABLE SYEOM", 0x31, "Hangul"),
    c(0xC165, None, "HANGUL SYLLABLE SYEOB", 0x31, "Hangul"),
    c(0xC166, None, "HANGUL SYLLABLE SYEOBS", 0x31, "Hangul"),
    c(0xC167, None, "HANGUL SYLLABLE SYEOS", 0x31, "Hangul"),
    c(0xC168, None, "HANGUL SYLLABLE SYEOSS", 0x31, "Hangul"),
    c(0xC169, None, "HANGUL SYLLABLE SYEONG", 0x31, "Hangul"),
    c(0xC16A, None, "HANGUL SYLLABLE SYEOJ", 0x31, "Hangul"),
    c(0xC16B, None, "HANGUL SYLLABLE SYEOC", 0x31, "Hangul"),
    c(0xC16C, None, "HANGUL SYLLABLE SYEOK", 0x31, "Hangul"),
    c(0xC16D, None, "HANGUL SYLLABLE SYEOT", 0x31, "Hangul"),
    c(0xC16E, None, "HANGUL SYLLABLE SYEOP", 0x31, "Hangul"),
    c(0xC16F, None, "HANGUL SYLLABLE SYEOH", 0x31, "Hangul"),
    c(0xC170, None, "HANGUL SYLLABLE SYE", 0x31, "Hangul"),
    c(0xC171, None, "HANGUL SYLLABLE SYEG", 0x31, "Hangul"),
    c(0xC172, None, "HANGUL SYLLABLE SYEGG", 0x31, "Hangul"),
    c(0xC173, None, "HANGUL SYLLABLE SYEGS", 0x31, "Hangul"),
    c(0xC174, None, "HANGUL SYLLABLE SYEN", 0x31, "Hangul"),
    c(0xC175, None, "HANGUL SYLLABLE SYENJ", 0x31, "Hangul"),
    c(0xC176, None, "HANGUL SYLLABLE SYENH", 0x31, "Hangul"),
    c(0xC177, None, "HANGUL SYLLABLE SYED", 0x31, "Hangul"),
    c(0xC178, None, "HANGUL SYLLABLE SYEL", 0x31, "Hangul"),
    c(0xC179, None, "HANGUL SYLLABLE SYELG", 0x31, "Hangul"),
    c(0xC17A, None, "HANGUL SYLLABLE SYELM", 0x31, "Hangul"),
    c(0xC17B, None, "HANGUL SYLLABLE SYELB", 0x31, "Hangul"),
    c(0xC17C, None, "HANGUL SYLLABLE SYELS", 0x31, "Hangul"),
    c(0xC17D, None, "HANGUL SYLLABLE SYELT", 0x31, "Hangul"),
    c(0xC17E, None, "HANGUL SYLLABLE SYELP", 0x31, "Hangul"),
    c(0xC17F, None, "HANGUL SYLLABLE SYELH", 0x31, "Hangul"),
    c(0xC180, None, "HANGUL SYLLABLE SYEM", 0x31, "Hangul"),
    c(0xC181, None, "HANGUL SYLLABLE SYEB", 0x31, "Hangul"),
    c(0xC182, None, "HANGUL SYLLABLE SYEBS", 0x31, "Hangul"),
    c(0xC183, None, "HANGUL SYLLABLE SYES", 0x31, "Hangul"),
    c(0xC184, None, "HANGUL SYLLABLE SYESS", 0x31, "Hangul"),
    c(0xC185, None, "HANGUL SYLLABLE SYENG", 0x31, "Hangul"),
    c(0xC186, None, "HANGUL SYLLABLE SYEJ", 0x31, "Hangul"),
    c(0xC187, None, "HANGUL SYLLABLE SYEC", 0x31, "Hangul"),
    c(0xC188, None, "HANGUL SYLLABLE SYEK", 0x31, "Hangul"),
    c(0xC189, None, "HANGUL SYLLABLE SYET", 0x31, "Hangul"),
    c(0xC18A, None, "HANGUL SYLLABLE SYEP", 0x31, "Hangul"),
    c(0xC18B, None, "HANGUL SYLLABLE SYEH", 0x31, "Hangul"),
    c(0xC18C, None, "HANGUL SYLLABLE SO", 0x31, "Hangul"),
    c(0xC18D, None, "HANGUL SYLLABLE SOG", 0x31, "Hangul"),
    c(0xC18E, None, "HANGUL SYLLABLE SOGG", 0x31, "Hangul"),
    c(0xC18F, None, "HANGUL SYLLABLE SOGS", 0x31, "Hangul"),
    c(0xC190, None, "HANGUL SYLLABLE SON", 0x31, "Hangul"),
    c(0xC191, None, "HANGUL SYLLABLE SONJ", 0x31, "Hangul"),
    c(0xC192, None, "HANGUL SYLLABLE SONH", 0x31, "Hangul"),
    c(0xC193, None, "HANGUL SYLLABLE SOD", 0x31, "Hangul"),
    c(0xC194, None, "HANGUL SYLLABLE SOL", 0x31, "Hangul"),
    c(0xC195, None, "HANGUL SYLLABLE SOLG", 0x31, "Hangul"),
    c(0xC196, None, "HANGUL SYLLABLE SOLM", 0x31, "Hangul"),
    c(0xC197, None, "HANGUL SYLLABLE SOLB", 0x31, "Hangul"),
    c(0xC198, None, "HANGUL SYLLABLE SOLS", 0x31, "Hangul"),
    c(0xC199, None, "HANGUL SYLLABLE SOLT", 0x31, "Hangul"),
    c(0xC19A, None, "HANGUL SYLLABLE SOLP", 0x31, "Hangul"),
    c(0xC19B, None, "HANGUL SYLLABLE SOLH", 0x31, "Hangul"),
    c(0xC19C, None, "HANGUL SYLLABLE SOM", 0x31, "Hangul"),
    c(0xC19D, None, "HANGUL SYLLABLE SOB", 0x31, "Hangul"),
    c(0xC19E, None, "HANGUL SYLLABLE SOBS", 0x31, "Hangul"),
    c(0xC19F, None, "HANGUL SYLLABLE SOS", 0x31, "Hangul"),
    c(0xC1A0, None, "HANGUL SYLLABLE SOSS", 0x31, "Hangul"),
    c(0xC1A1, None, "HANGUL SYLLABLE SONG", 0x31, "Hangul"),
    c(0xC1A2, None, "HANGUL SYLLABLE SOJ", 0x31, "Hangul"),
    c(0xC1A3, None, "HANGUL SYLLABLE SOC", 0x31, "Hangul"),
    c(0xC1A4, None, "HANGUL SYLLABLE SOK", 0x31, "Hangul"),
    c(0xC1A5, None, "HANGUL SYLLABLE SOT", 0x31, "Hangul"),
    c(0xC1A6, None, "HANGUL SYLLABLE SOP", 0x31, "Hangul"),
    c(0xC1A7, None, "HANGUL SYLLABLE SOH", 0x31, "Hangul"),
    c(0xC1A8, None, "HANGUL SYLLABLE SWA", 0x31, "Hangul"),
    c(0xC1A9, None, "HANGUL SYLLABLE SWAG", 0x31, "Hangul"),
    c(0xC1AA, None, "HANGUL SYLLABLE SWAGG", 0x31, "Hangul"),
    c(0xC1AB, None, "HANGUL SYLLABLE SWAGS", 0x31, "Hangul"),
    c(0xC1AC, None, "HANGUL SYLLABLE SWAN", 0x31, "Hangul"),
    c(0xC1AD, None, "HANGUL SYLLABLE SWANJ", 0x31, "Hangul"),
    c(0xC1AE, None, "HANGUL SYLLABLE SWANH", 0x31, "Hangul"),
    c(0xC1AF, None, "HANGUL SYLLABLE SWAD", 0x31, "Hangul"),
    c(0xC1B0, None, "HANGUL SYLLABLE SWAL", 0x31, "Hangul"),
    c(0xC1B1, None, "HANGUL SYLLABLE SWALG", 0x31, "Hangul"),
    c(0xC1B2, None, "HANGUL SYLLABLE SWALM", 0x31, "Hangul"),
    c(0xC1B3, None, "HANGUL SYLLABLE SWALB", 0x31, "Hangul"),
    c(0xC1B4, None, "HANGUL SYLLABLE SWALS", 0x31, "Hangul"),
    c(0xC1B5, None, "HANGUL SYLLABLE SWALT", 0x31, "Hangul"),
    c(0xC1B6, None, "HANGUL SYLLABLE SWALP", 0x31, "Hangul"),
    c(0xC1B7, None, "HANGUL SYLLABLE SWALH", 0x31, "Hangul"),
    c(0xC1B8, None, "HANGUL SYLLABLE SWAM", 0x31, "Hangul"),
    c(0xC1B9, None, "HANGUL SYLLABLE SWAB", 0x31, "Hangul"),
    c(0xC1BA, None, "HANGUL SYLLABLE SWABS", 0x31, "Hangul"),
    c(0xC1BB, None, "HANGUL SYLLABLE SWAS", 0x31, "Hangul"),
    c(0xC1BC, None, "HANGUL SYLLABLE SWASS", 0x31, "Hangul"),
    c(0xC1BD, None, "HANGUL SYLLABLE SWANG", 0x31, "Hangul"),
    c(0xC1BE, None, "HANGUL SYLLABLE SWAJ", 0x31, "Hangul"),
    c(0xC1BF, None, "HANGUL SYLLABLE SWAC", 0x31, "Hangul"),
    c(0xC1C0, None, "HANGUL SYLLABLE SWAK", 0x31, "Hangul"),
    c(0xC1C1, None, "HANGUL SYLLABLE SWAT", 0x31, "Hangul"),
    c(0xC1C2, None, "HANGUL SYLLABLE SWAP", 0x31, "Hangul"),
    c(0xC1C3, None, "HANGUL SYLLABLE SWAH", 0x31, "Hangul"),
    c(0xC1C4, None, "HANGUL SYLLABLE SWAE", 0x31, "Hangul"),
    c(0xC1C5, None, "HANGUL SYLLABLE SWAEG", 0x31, "Hangul"),
    c(0xC1C6, None, "HANGUL SYLLABLE SWAEGG", 0x31, "Hangul"),
    c(0xC1C7, None, "HANGUL SYLLABLE SWAEGS", 0x31, "Hangul"),
    c(0xC1C8, None, "HANGUL SYLLABLE SWAEN", 0x31, "Hangul"),
    c(0xC1C9, None, "HANGUL SYLLABLE SWAENJ", 0x31, "Hangul"),
    c(0xC1CA, None, "HANGUL SYLLABLE SWAENH", 0x31, "Hangul"),
    c(0xC1CB, None, "HANGUL SYLLABLE SWAED", 0x31, "Hangul"),
    c(0xC1CC, None, "HANGUL SYLLABLE SWAEL", 0x31, "Hangul"),
    c(0xC1CD, None, "HANGUL SYLLABLE SWAELG", 0x31, "Hangul"),
    c(0xC1CE, None, "HANGUL SYLLABLE SWAELM", 0x31, "Hangul"),
    c(0xC1CF, None, "HANGUL SYLLABLE SWAELB", 0x31, "Hangul"),
    c(0xC1D0, None, "HANGUL SYLLABLE SWAELS", 0x31, "Hangul"),
    c(0xC1D1, None, "HANGUL SYLLABLE SWAELT", 0x31, "Hangul"),
    c(0xC1D2, None, "HANGUL SYLLABLE SWAELP", 0x31, "Hangul"),
    c(0xC1D3, None, "HANGUL SYLLABLE SWAELH", 0x31, "Hangul"),
    c(0xC1D4, None, "HANGUL SYLLABLE SWAEM", 0x31, "Hangul"),
    c(0xC1D5, None, "HANGUL SYLLABLE SWAEB", 0x31, "Hangul"),
    c(0xC1D6, None, "HANGUL SYLLABLE SWAEBS", 0x31, "Hangul"),
    c(0xC1D7, None, "HANGUL SYLLABLE SWAES", 0x31, "Hangul"),
    c(0xC1D8, None, "HANGUL SYLLABLE SWAESS", 0x31, "Hangul"),
    c(0xC1D9, None, "HANGUL SYLLABLE SWAENG", 0x31, "Hangul"),
    c(0xC1DA, None, "HANGUL SYLLABLE SWAEJ", 0x31, "Hangul"),
    c(0xC1DB, None, "HANGUL SYLLABLE SWAEC", 0x31, "Hangul"),
    c(0xC1DC, None, "HANGUL SYLLABLE SWAEK", 0x31, "Hangul"),
    c(0xC1DD, None, "HANGUL SYLLABLE SWAET", 0x31, "Hangul"),
    c(0xC1DE, None, "HANGUL SYLLABLE SWAEP", 0x31, "Hangul"),
    c(0xC1DF, None, "HANGUL SYLLABLE SWAEH", 0x31, "Hangul"),
    c(0xC1E0, None, "HANGUL SYLLABLE SOE", 0x31, "Hangul"),
    c(0xC1E1, None, "HANGUL SYLLABLE SOEG", 0x31, "Hangul"),
    c(0xC1E2, None, "HANGUL SYLLABLE SOEGG", 0x31, "Hangul"),
    c(0xC1E3, None, "HANGUL SYLLABLE SOEGS", 0x31, "Hangul"),
    c(0xC1E4, None, "HANGUL SYLLABLE SOEN", 0x31, "Hangul"),
    c(0xC1E5, None, "HANGUL SYLLABLE SOENJ", 0x31, "Hangul"),
    c(0xC1E6, None, "HANGUL SYLLABLE SOENH", 0x31, "Hangul"),
    c(0xC1E7, None, "HANGUL SYLLABLE SOED", 0x31, "Hangul"),
    c(0xC1E8, None, "HANGUL SYLLABLE SOEL", 0x31, "Hangul"),
    c(0xC1E9, None, "HANGUL SYLLABLE SOELG", 0x31, "Hangul"),
    c(0xC1EA, None, "HANGUL SYLLABLE SOELM", 0x31, "Hangul"),
    c(0xC1EB, None, "HANGUL SYLLABLE SOELB", 0x31, "Hangul"),
    c(0xC1EC, None, "HANGUL SYLLABLE SOELS", 0x31, "Hangul"),
    c(0xC1ED, None, "HANGUL SYLLABLE SOELT", 0x31, "Hangul"),
    c(0xC1EE, None, "HANGUL SYLLABLE SOELP", 0x31, "Hangul"),
    c(0xC1EF, None, "HANGUL SYLLABLE SOELH", 0x31, "Hangul"),
    c(0xC1F0, None, "HANGUL SYLLABLE SOEM", 0x31, "Hangul"),
    c(0xC1F1, None, "HANGUL SYLLABLE SOEB", 0x31, "Hangul"),
    c(0xC1F2, None, "HANGUL SYLLABLE SOEBS", 0x31, "Hangul"),
    c(0xC1F3, None, "HANGUL SYLLABLE SOES", 0x31, "Hangul"),
    c(0xC1F4, None, "HANGUL SYLLABLE SOESS", 0x31, "Hangul"),
    c(0xC1F5, None, "HANGUL SYLLABLE SOENG", 0x31, "Hangul"),
    c(0xC1F6, None, "HANGUL SYLLABLE SOEJ", 0x31, "Hangul"),
    c(0xC1F7, None, "HANGUL SYLLABLE SOEC", 0x31, "Hangul"),
    c(0xC1F8, None, "HANGUL SYLLABLE SOEK", 0x31, "Hangul"),
    c(0xC1F9, None, "HANGUL SYLLABLE SOET", 0x31, "Hangul"),
    c(0xC1FA, None, "HANGUL SYLLABLE SOEP", 0x31, "Hangul"),
    c(0xC1FB, None, "HANGUL SYLLABLE SOEH", 0x31, "Hangul"),
    c(0xC1FC, None, "HANGUL SYLLABLE SYO", 0x31, "Hangul"),
    c(0xC1FD, None, "HANGUL SYLLABLE SYOG", 0x31, "Hangul"),
    c(0xC1FE, None, "HANGUL SYLLABLE SYOGG", 0x31, "Hangul"),
    c(0xC1FF, None, "HANGUL SYLLABLE SYOGS", 0x31, "Hangul"),
    c(0xC200, None, "HANGUL SYLLABLE SYON", 0x31, "Hangul"),
    c(0xC201, None, "HANGUL SYLLABLE SYONJ", 0x31, "Hangul"),
    c(0xC202, None, "HANGUL SYLLABLE SYONH", 0x31, "Hangul"),
    c(0xC203, None, "HANGUL SYLLABLE SYOD", 0x31, "Hangul"),
    c(0xC204, None, "HANGUL SYLLABLE SYOL", 0x31, "Hangul"),
    c(0xC205, None, "HANGUL SYLLABLE SYOLG", 0x31, "Hangul"),
    c(0xC206, None, "HANGUL SYLLABLE SYOLM", 0x31, "Hangul"),
    c(0xC207, None, "HANGUL SYLLABLE SYOLB", 0x31, "Hangul"),
    c(0xC208, None, "HANGUL SYLLABLE SYOLS", 0x31, "Hangul"),
    c(0xC209, None, "HANGUL SYLLABLE SYOLT", 0x31, "Hangul"),
    c(0xC20A, None, "HANGUL SYLLABLE SYOLP", 0x31, "Hangul"),
    c(0xC20B, None, "HANGUL SYLLABLE SYOLH", 0x31, "Hangul"),
    c(0xC20C, None, "HANGUL SYLLABLE SYOM", 0x31, "Hangul"),
    c(0xC20D, None, "HANGUL SYLLABLE SYOB", 0x31, "Hangul"),
    c(0xC20E, None, "HANGUL SYLLABLE SYOBS", 0x31, "Hangul"),
    c(0xC20F, None, "HANGUL SYLLABLE SYOS", 0x31, "Hangul"),
    c(0xC210, None, "HANGUL SYLLABLE SYOSS", 0x31, "Hangul"),
    c(0xC211, None, "HANGUL SYLLABLE SYONG", 0x31, "Hangul"),
    c(0xC212, None, "HANGUL SYLLABLE SYOJ", 0x31, "Hangul"),
    c(0xC213, None, "HANGUL SYLLABLE SYOC", 0x31, "Hangul"),
    c(0xC214, None, "HANGUL SYLLABLE SYOK", 0x31, "Hangul"),
    c(0xC215, None, "HANGUL SYLLABLE SYOT", 0x31, "Hangul"),
    c(0xC216, None, "HANGUL SYLLABLE SYOP", 0x31, "Hangul"),
    c(0xC217, None, "HANGUL SYLLABLE SYOH", 0x31, "Hangul"),
    c(0xC218, None, "HANGUL SYLLABLE SU", 0x31, "Hangul"),
    c(0xC219, None, "HANGUL SYLLABLE SUG", 0x31, "Hangul"),
    c(0xC21A, None, "HANGUL SYLLABLE SUGG", 0x31, "Hangul"),
    c(0xC21B, None, "HANGUL SYLLABLE SUGS", 0x31, "Hangul"),
    c(0xC21C, None, "HANGUL SYLLABLE SUN", 0x31, "Hangul"),
    c(0xC21D, None, "HANGUL SYLLABLE SUNJ", 0x31, "Hangul"),
    c(0xC21E, None, "HANGUL SYLLABLE SUNH", 0x31, "Hangul"),
    c(0xC21F, None, "HANGUL SYLLABLE SUD", 0x31, "Hangul"),
    c(0xC220, None, "HANGUL SYLLABLE SUL", 0x31, "Hangul"),
    c(0xC221, None, "HANGUL SYLLABLE SULG", 0x31, "Hangul"),
    c(0xC222, None, "HANGUL SYLLABLE SULM", 0x31, "Hangul"),
    c(0xC223, None, "HANGUL SYLLABLE SULB", 0x31, "Hangul"),
    c(0xC224, None, "HANGUL SYLLABLE SULS", 0x31, "Hangul"),
    c(0xC225, None, "HANGUL SYLLABLE SULT", 0x31, "Hangul"),
    c(0xC226, None, "HANGUL SYLLABLE SULP", 0x31, "Hangul"),
    c(0xC227, None, "HANGUL SYLLABLE SULH", 0x31, "Hangul"),
    c(0xC228, None, "HANGUL SYLLABLE SUM", 0x31, "Hangul"),
    c(0xC229, None, "HANGUL SYLLABLE SUB", 0x31, "Hangul"),
    c(0xC22A, None, "HANGUL SYLLABLE SUBS", 0x31, "Hangul"),
    c(0xC22B, None, "HANGUL SYLLABLE SUS", 0x31, "Hangul"),
    c(0xC22C, None, "HANGUL SYLLABLE SUSS", 0x31, "Hangul"),
    c(0xC22D, None, "HANGUL SYLLABLE SUNG", 0x31, "Hangul"),
    c(0xC22E, None, "HANGUL SYLLABLE SUJ", 0x31, "Hangul"),
    c(0xC22F, None, "HANGUL SYLLABLE SUC", 0x31, "Hangul"),
    c(0xC230, None, "HANGUL SYLLABLE SUK", 0x31, "Hangul"),
    c(0xC231, None, "HANGUL SYLLABLE SUT", 0x31, "Hangul"),
    c(0xC232, None, "HANGUL SYLLABLE SUP", 0x31, "Hangul"),
    c(0xC233, None, "HANGUL SYLLABLE SUH", 0x31, "Hangul"),
    c(0xC234, None, "HANGUL SYLLABLE SWEO", 0x31, "Hangul"),
    c(0xC235, None, "HANGUL SYLLABLE SWEOG", 0x31, "Hangul"),
    c(0xC236, None, "HANGUL SYLLABLE SWEOGG", 0x31, "Hangul"),
    c(0xC237, None, "HANGUL SYLLABLE SWEOGS", 0x31, "Hangul"),
    c(0xC238, None, "HANGUL SYLLABLE SWEON", 0x31, "Hangul"),
    c(0xC239, None, "HANGUL SYLLABLE SWEONJ", 0x31, "Hangul"),
    c(0xC23A, None, "HANGUL SYLLABLE SWEONH", 0x31, "Hangul"),
    c(0xC23B, None, "HANGUL SYLLABLE SWEOD", 0x31, "Hangul"),
    c(0xC23C, None, "HANGUL SYLLABLE SWEOL", 0x31, "Hangul"),
    c(0xC23D, None, "HANGUL SYLLABLE SWEOLG", 0x31, "Hangul"),
    c(0xC23E, None, "HANGUL SYLLABLE SWEOLM", 0x31, "Hangul"),
    c(0xC23F, None, "HANGUL SYLLABLE SWEOLB", 0x31, "Hangul"),
    c(0xC240, None, "HANGUL SYLLABLE SWEOLS", 0x31, "Hangul"),
    c(0xC241, None, "HANGUL SYLLABLE SWEOLT", 0x31, "Hangul"),
    c(0xC242, None, "HANGUL SYLLABLE SWEOLP", 0x31, "Hangul"),
    c(0xC243, None, "HANGUL SYLLABLE SWEOLH", 0x31, "Hangul"),
    c(0xC244, None, "HANGUL SYLLABLE SWEOM", 0x31, "Hangul"),
    c(0xC245, None, "HANGUL SYLLABLE SWEOB", 0x31, "Hangul"),
    c(0xC246, None, "HANGUL SYLLABLE SWEOBS", 0x31, "Hangul"),
    c(0xC247, None, "HANGUL SYLLABLE SWEOS", 0x31, "Hangul"),
    c(0xC248, None, "HANGUL SYLLABLE SWEOSS", 0x31, "Hangul"),
    c(0xC249, None, "HANGUL SYLLABLE SWEONG", 0x31, "Hangul"),
    c(0xC24A, None, "HANGUL SYLLABLE SWEOJ", 0x31, "Hangul"),
    c(0xC24B, None, "HANGUL SYLLABLE SWEOC", 0x31, "Hangul"),
    c(0xC24C, None, "HANGUL SYLLABLE SWEOK", 0x31, "Hangul"),
    c(0xC24D, None, "HANGUL SYLLABLE SWEOT", 0x31, "Hangul"),
    c(0xC24E, None, "HANGUL SYLLABLE SWEOP", 0x31, "Hangul"),
    c(0xC24F, None, "HANGUL SYLLABLE SWEOH", 0x31, "Hangul"),
    c(0xC250, None, "HANGUL SYLLABLE SWE", 0x31, "Hangul"),
    c(0xC251, None, "HANGUL SYLLABLE SWEG", 0x31, "Hangul"),
    c(0xC252, None, "HANGUL SYLLABLE SWEGG", 0x31, "Hangul"),
    c(0xC253, None, "HANGUL SYLLABLE SWEGS", 0x31, "Hangul"),
    c(0xC254, None, "HANGUL SYLLABLE SWEN", 0x31, "Hangul"),
    c(0xC255, None, "HANGUL SYLLABLE SWENJ", 0x31, "Hangul"),
    c(0xC256, None, "HANGUL SYLLABLE SWENH", 0x31, "Hangul"),
    c(0xC257, None, "HANGUL SYLLABLE SWED", 0x31, "Hangul"),
    c(0xC258, None, "HANGUL SYLLABLE SWEL", 0x31, "Hangul"),
    c(0xC259, None, "HANGUL SYLLABLE SWELG", 0x31, "Hangul"),
    c(0xC25A, None, "HANGUL SYLLABLE SWELM", 0x31, "Hangul"),
    c(0xC25B, None, "HANGUL SYLLABLE SWELB", 0x31, "Hangul"),
    c(0xC25C, None, "HANGUL SYLLABLE SWELS", 0x31, "Hangul"),
    c(0xC25D, None, "HANGUL SYLLABLE SWELT", 0x31, "Hangul"),
    c(0xC25E, None, "HANGUL SYLLABLE SWELP", 0x31, "Hangul"),
    c(0xC25F, None, "HANGUL SYLLABLE SWELH", 0x31, "Hangul"),
    c(0xC260, None, "HANGUL SYLLABLE SWEM", 0x31, "Hangul"),
    c(0xC261, None, "HANGUL SYLLABLE SWEB", 0x31, "Hangul"),
    c(0xC262, None, "HANGUL SYLLABLE SWEBS", 0x31, "Hangul"),
    c(0xC263, None, "HANGUL SYLLABLE SWES", 0x31, "Hangul"),
    c(0xC264, None, "HANGUL SYLLABLE SWESS", 0x31, "Hangul"),
    c(0xC265, None, "HANGUL SYLLABLE SWENG", 0x31, "Hangul"),
    c(0xC266, None, "HANGUL SYLLABLE SWEJ", 0x31, "Hangul"),
    c(0xC267, None, "HANGUL SYLLABLE SWEC", 0x31, "Hangul"),
    c(0xC268, None, "HANGUL SYLLABLE SWEK", 0x31, "Hangul"),
    c(0xC269, None, "HANGUL SYLLABLE SWET", 0x31, "Hangul"),
    c(0xC26A, None, "HANGUL SYLLABLE SWEP", 0x31, "Hangul"),
    c(0xC26B, None, "HANGUL SYLLABLE SWEH", 0x31, "Hangul"),
    c(0xC26C, None, "HANGUL SYLLABLE SWI", 0x31, "Hangul"),
    c(0xC26D, None, "HANGUL SYLLABLE SWIG", 0x31, "Hangul"),
    c(0xC26E, None, "HANGUL SYLLABLE SWIGG", 0x31, "Hangul"),
    c(0xC26F, None, "HANGUL SYLLABLE SWIGS", 0x31, "Hangul"),
    c(0xC270, None, "HANGUL SYLLABLE SWIN", 0x31, "Hangul"),
    c(0xC271, None, "HANGUL SYLLABLE SWINJ", 0x31, "Hangul"),
    c(0xC272, None, "HANGUL SYLLABLE SWINH", 0x31, "Hangul"),
    c(0xC273, None, "HANGUL SYLLABLE SWID", 0x31, "Hangul"),
    c(0xC274, None, "HANGUL SYLLABLE SWIL", 0x31, "Hangul"),
    c(0xC275, None, "HANGUL SYLLABLE SWILG", 0x31, "Hangul"),
    c(0xC276, None, "HANGUL SYLLABLE SWILM", 0x31, "Hangul"),
    c(0xC277, None, "HANGUL SYLLABLE SWILB", 0x31, "Hangul"),
    c(0xC278, None, "HANGUL SYLLABLE SWILS", 0x31, "Hangul"),
    c(0xC279, None, "HANGUL SYLLABLE SWILT", 0x31, "Hangul"),
    c(0xC27A, None, "HANGUL SYLLABLE SWILP", 0x31, "Hangul"),
    c(0xC27B, None, "HANGUL SYLLABLE SWILH", 0x31, "Hangul"),
    c(0xC27C, None, "HANGUL SYLLABLE SWIM", 0x31, "Hangul"),
    c(0xC27D, None, "HANGUL SYLLABLE SWIB", 0x31, "Hangul"),
    c(0xC27E, None, "HANGUL SYLLABLE SWIBS", 0x31, "Hangul"),
    c(0xC27F, None, "HANGUL SYLLABLE SWIS", 0x31, "Hangul"),
    c(0xC280, None, "HANGUL SYLLABLE SWISS", 0x31, "Hangul"),
    c(0xC281, None, "HANGUL SYLLABLE SWING", 0x31, "Hangul"),
    c(0xC282, None, "HANGUL SYLLABLE SWIJ", 0x31, "Hangul"),
    c(0xC283, None, "HANGUL SYLLABLE SWIC", 0x31, "Hangul"),
    c(0xC284, None, "HANGUL SYLLABLE SWIK", 0x31, "Hangul"),
    c(0xC285, None, "HANGUL SYLLABLE SWIT", 0x31, "Hangul"),
    c(0xC286, None, "HANGUL SYLLABLE SWIP", 0x31, "Hangul"),
    c(0xC287, None, "HANGUL SYLLABLE SWIH", 0x31, "Hangul"),
    c(0xC288, None, "HANGUL SYLLABLE SYU", 0x31, "Hangul"),
    c(0xC289, None, "HANGUL SYLLABLE SYUG", 0x31, "Hangul"),
    c(0xC28A, None, "HANGUL SYLLABLE SYUGG", 0x31, "Hangul"),
    c(0xC28B, None, "HANGUL SYLLABLE SYUGS", 0x31, "Hangul"),
    c(0xC28C, None, "HANGUL SYLLABLE SYUN", 0x31, "Hangul"),
    c(0xC28D, None, "HANGUL SYLLABLE SYUNJ", 0x31, "Hangul"),
    c(0xC28E, None, "HANGUL SYLLABLE SYUNH", 0x31, "Hangul"),
    c(0xC28F, None, "HANGUL SYLLABLE SYUD", 0x31, "Hangul"),
    c(0xC290, None, "HANGUL SYLLABLE SYUL", 0x31, "Hangul"),
    c(0xC291, None, "HANGUL SYLLABLE SYULG", 0x31, "Hangul"),
    c(0xC292, None, "HANGUL SYLLABLE SYULM", 0x31, "Hangul"),
    c(0xC293, None, "HANGUL SYLLABLE SYULB", 0x31, "Hangul"),
    c(0xC294, None, "HANGUL SYLLABLE SYULS", 0x31, "Hangul"),
    c(0xC295, None, "HANGUL SYLLABLE SYULT", 0x31, "Hangul"),
    c(0xC296, None, "HANGUL SYLLABLE SYULP", 0x31, "Hangul"),
    c(0xC297, None, "HANGUL SYLLABLE SYULH", 0x31, "Hangul"),
    c(0xC298, None, "HANGUL SYLLABLE SYUM", 0x31, "Hangul"),
    c(0xC299, None, "HANGUL SYLLABLE SYUB", 0x31, "Hangul"),
    c(0xC29A, None, "HANGUL SYLLABLE SYUBS", 0x31, "Hangul"),
    c(0xC29B, None, "HANGUL SYLLABLE SYUS", 0x31, "Hangul"),
    c(0xC29C, None, "HANGUL SYLLABLE SYUSS", 0x31, "Hangul"),
    c(0xC29D, None, "HANGUL SYLLABLE SYUNG", 0x31, "Hangul"),
    c(0xC29E, None, "HANGUL SYLLABLE SYUJ", 0x31, "Hangul"),
    c(0xC29F, None, "HANGUL SYLLABLE SYUC", 0x31, "Hangul"),
    c(0xC2A0, None, "HANGUL SYLLABLE SYUK", 0x31, "Hangul"),
    c(0xC2A1, None, "HANGUL SYLLABLE SYUT", 0x31, "Hangul"),
    c(0xC2A2, None, "HANGUL SYLLABLE SYUP", 0x31, "Hangul"),
    c(0xC2A3, None, "HANGUL SYLLABLE SYUH", 0x31, "Hangul"),
    c(0xC2A4, None, "HANGUL SYLLABLE SEU", 0x31, "Hangul"),
    c(0xC2A5, None, "HANGUL SYLLABLE SEUG", 0x31, "Hangul"),
    c(0xC2A6, None, "HANGUL SYLLABLE SEUGG", 0x31, "Hangul"),
    c(0xC2A7, None, "HANGUL SYLLABLE SEUGS", 0x31, "Hangul"),
    c(0xC2A8, None, "HANGUL SYLLABLE SEUN", 0x31, "Hangul"),
    c(0xC2A9, None, "HANGUL SYLLABLE SEUNJ", 0x31, "Hangul"),
    c(0xC2AA, None, "HANGUL SYLLABLE SEUNH", 0x31, "Hangul"),
    c(0xC2AB, None, "HANGUL SYLLABLE SEUD", 0x31, "Hangul"),
    c(0xC2AC, None, "HANGUL SYLLABLE SEUL", 0x31, "Hangul"),
    c(0xC2AD, None, "HANGUL SYLLABLE SEULG", 0x31, "Hangul"),
    c(0xC2AE, None, "HANGUL SYLLABLE SEULM", 0x31, "Hangul"),
    c(0xC2AF, None, "HANGUL SYLLABLE SEULB", 0x31, "Hangul"),
    c(0xC2B0, None, "HANGUL SYLLABLE SEULS", 0x31, "Hangul"),
    c(0xC2B1, None, "HANGUL SYLLABLE SEULT", 0x31, "Hangul"),
    c(0xC2B2, None, "HANGUL SYLLABLE SEULP", 0x31, "Hangul"),
    c(0xC2B3, None, "HANGUL SYLLABLE SEULH", 0x31, "Hangul"),
    c(0xC2B4, None, "HANGUL SYLLABLE SEUM", 0x31, "Hangul"),
    c(0xC2B5, None, "HANGUL SYLLABLE SEUB", 0x31, "Hangul"),
    c(0xC2B6, None, "HANGUL SYLLABLE SEUBS", 0x31, "Hangul"),
    c(0xC2B7, None, "HANGUL SYLLABLE SEUS", 0x31, "Hangul"),
    c(0xC2B8, None, "HANGUL SYLLABLE SEUSS", 0x31, "Hangul"),
    c(0xC2B9, None, "HANGUL SYLLABLE SEUNG", 0x31, "Hangul"),
    c(0xC2BA, None, "HANGUL SYLLABLE SEUJ", 0x31, "Hangul"),
    c(0xC2BB, None, "HANGUL SYLLABLE SEUC", 0x31, "Hangul"),
    c(0xC2BC, None, "HANGUL SYLLABLE SEUK", 0x31, "Hangul"),
    c(0xC2BD, None, "HANGUL SYLLABLE SEUT", 0x31, "Hangul"),
    c(0xC2BE, None, "HANGUL SYLLABLE SEUP", 0x31, "Hangul"),
    c(0xC2BF, None, "HANGUL SYLLABLE SEUH", 0x31, "Hangul"),
    c(0xC2C0, None, "HANGUL SYLLABLE SYI", 0x31, "Hangul"),
    c(0xC2C1, None, "HANGUL SYLLABLE SYIG", 0x31, "Hangul"),
    c(0xC2C2, None, "HANGUL SYLLABLE SYIGG", 0x31, "Hangul"),
    c(0xC2C3, None, "HANGUL SYLLABLE SYIGS", 0x31, "Hangul"),
    c(0xC2C4, None, "HANGUL SYLLABLE SYIN", 0x31, "Hangul"),
    c(0xC2C5, None, "HANGUL SYLLABLE SYINJ", 0x31, "Hangul"),
    c(0xC2C6, None, "HANGUL SYLLABLE SYINH", 0x31, "Hangul"),
    c(0xC2C7, None, "HANGUL SYLLABLE SYID", 0x31, "Hangul"),
    c(0xC2C8, None, "HANGUL SYLLABLE SYIL", 0x31, "Hangul"),
    c(0xC2C9, None, "HANGUL SYLLABLE SYILG", 0x31, "Hangul"),
    c(0xC2CA, None, "HANGUL SYLLABLE SYILM", 0x31, "Hangul"),
    c(0xC2CB, None, "HANGUL SYLLABLE SYILB", 0x31, "Hangul"),
    c(0xC2CC, None, "HANGUL SYLLABLE SYILS", 0x31, "Hangul"),
    c(0xC2CD, None, "HANGUL SYLLABLE SYILT", 0x31, "Hangul"),
    c(0xC2CE, None, "HANGUL SYLLABLE SYILP", 0x31, "Hangul"),
    c(0xC2CF, None, "HANGUL SYLLABLE SYILH", 0x31, "Hangul"),
    c(0xC2D0, None, "HANGUL SYLLABLE SYIM", 0x31, "Hangul"),
    c(0xC2D1, None, "HANGUL SYLLABLE SYIB", 0x31, "Hangul"),
    c(0xC2D2, None, "HANGUL SYLLABLE SYIBS", 0x31, "Hangul"),
    c(0xC2D3, None, "HANGUL SYLLABLE SYIS", 0x31, "Hangul"),
    c(0xC2D4, None, "HANGUL SYLLABLE SYISS", 0x31, "Hangul"),
    c(0xC2D5, None, "HANGUL SYLLABLE SYING", 0x31, "Hangul"),
    c(0xC2D6, None, "HANGUL SYLLABLE SYIJ", 0x31, "Hangul"),
    c(0xC2D7, None, "HANGUL SYLLABLE SYIC", 0x31, "Hangul"),
    c(0xC2D8, None, "HANGUL SYLLABLE SYIK", 0x31, "Hangul"),
    c(0xC2D9, None, "HANGUL SYLLABLE SYIT", 0x31, "Hangul"),
    c(0xC2DA, None, "HANGUL SYLLABLE SYIP", 0x31, "Hangul"),
    c(0xC2DB, None, "HANGUL SYLLABLE SYIH", 0x31, "Hangul"),
    c(0xC2DC, None, "HANGUL SYLLABLE SI", 0x31, "Hangul"),
    c(0xC2DD, None, "HANGUL SYLLABLE SIG", 0x31, "Hangul"),
    c(0xC2DE, None, "HANGUL SYLLABLE SIGG", 0x31, "Hangul"),
    c(0xC2DF, None, "HANGUL SYLLABLE SIGS", 0x31, "Hangul"),
    c(0xC2E0, None, "HANGUL SYLLABLE SIN", 0x31, "Hangul"),
    c(0xC2E1, None, "HANGUL SYLLABLE SINJ", 0x31, "Hangul"),
    c(0xC2E2, None, "HANGUL SYLLABLE SINH", 0x31, "Hangul"),
    c(0xC2E3, None, "HANGUL SYLLABLE SID", 0x31, "Hangul"),
    c(0xC2E4, None, "HANGUL SYLLABLE SIL", 0x31, "Hangul"),
    c(0xC2E5, None, "HANGUL SYLLABLE SILG", 0x31, "Hangul"),
    c(0xC2E6, None, "HANGUL SYLLABLE SILM", 0x31, "Hangul"),
    c(0xC2E7, None, "HANGUL SYLLABLE SILB", 0x31, "Hangul"),
    c(0xC2E8, None, "HANGUL SYLLABLE SILS", 0x31, "Hangul"),
    c(0xC2E9, None, "HANGUL SYLLABLE SILT", 0x31, "Hangul"),
    c(0xC2EA, None, "HANGUL SYLLABLE SILP", 0x31, "Hangul"),
    c(0xC2EB, None, "HANGUL SYLLABLE SILH", 0x31, "Hangul"),
    c(0xC2EC, None, "HANGUL SYLLABLE SIM", 0x31, "Hangul"),
    c(0xC2ED, None, "HANGUL SYLLABLE SIB", 0x31, "Hangul"),
    c(0xC2EE, None, "HANGUL SYLLABLE SIBS", 0x31, "Hangul"),
    c(0xC2EF, None, "HANGUL SYLLABLE SIS", 0x31, "Hangul"),
    c(0xC2F0, None, "HANGUL SYLLABLE SISS", 0x31, "Hangul"),
    c(0xC2F1, None, "HANGUL SYLLABLE SING", 0x31, "Hangul"),
    c(0xC2F2, None, "HANGUL SYLLABLE SIJ", 0x31, "Hangul"),
    c(0xC2F3, None, "HANGUL SYLLABLE SIC", 0x31, "Hangul"),
    c(0xC2F4, None, "HANGUL SYLLABLE SIK", 0x31, "Hangul"),
    c(0xC2F5, None, "HANGUL SYLLABLE SIT", 0x31, "Hangul"),
    c(0xC2F6, None, "HANGUL SYLLABLE SIP", 0x31, "Hangul"),
    c(0xC2F7, None, "HANGUL SYLLABLE SIH", 0x31, "Hangul"),
    c(0xC2F8, None, "HANGUL SYLLABLE SSA", 0x31, "Hangul"),
    c(0xC2F9, None, "HANGUL SYLLABLE SSAG", 0x31, "Hangul"),
    c(0xC2FA, None, "HANGUL SYLLABLE SSAGG", 0x31, "Hangul"),
    c(0xC2FB, None, "HANGUL SYLLABLE SSAGS", 0x31, "Hangul"),
    c(0xC2FC, None, "HANGUL SYLLABLE SSAN", 0x31, "Hangul"),
    c(0xC2FD, None, "HANGUL SYLLABLE SSANJ", 0x31, "Hangul"),
    c(0xC2FE, None, "HANGUL SYLLABLE SSANH", 0x31, "Hangul"),
    c(0xC2FF, None, "HANGUL SYLLABLE SSAD", 0x31, "Hangul"),
    c(0xC300, None, "HANGUL SYLLABLE SSAL", 0x31, "Hangul"),
    c(0xC301, None, "HANGUL SYLLABLE SSALG", 0x31, "Hangul"),
    c(0xC302, None, "HANGUL SYLLABLE SSALM", 0x31, "Hangul"),
    c(0xC303, None, "HANGUL SYLLABLE SSALB", 0x31, "Hangul"),
    c(0xC304, None, "HANGUL SYLLABLE SSALS", 0x31, "Hangul"),
    c(0xC305, None, "HANGUL SYLLABLE SSALT", 0x31, "Hangul"),
    c(0xC306, None, "HANGUL SYLLABLE SSALP", 0x31, "Hangul"),
    c(0xC307, None, "HANGUL SYLLABLE SSALH", 0x31, "Hangul"),
    c(0xC308, None, "HANGUL SYLLABLE SSAM", 0x31, "Hangul"),
    c(0xC309, None, "HANGUL SYLLABLE SSAB", 0x31, "Hangul"),
    c(0xC30A, None, "HANGUL SYLLABLE SSABS", 0x31, "Hangul"),
    c(0xC30B, None, "HANGUL SYLLABLE SSAS", 0x31, "Hangul"),
    c(0xC30C, None, "HANGUL SYLLABLE SSASS", 0x31, "Hangul"),
    c(0xC30D, None, "HANGUL SYLLABLE SSANG", 0x31, "Hangul"),
    c(0xC30E, None, "HANGUL SYLLABLE SSAJ", 0x31, "Hangul"),
    c(0xC30F, None, "HANGUL SYLLABLE SSAC", 0x31, "Hangul"),
    c(0xC310, None, "HANGUL SYLLABLE SSAK", 0x31, "Hangul"),
    c(0xC311, None, "HANGUL SYLLABLE SSAT", 0x31, "Hangul"),
    c(0xC312, None, "HANGUL SYLLABLE SSAP", 0x31, "Hangul"),
    c(0xC313, None, "HANGUL SYLLABLE SSAH", 0x31, "Hangul"),
    c(0xC314, None, "HANGUL SYLLABLE SSAE", 0x31, "Hangul"),
    c(0xC315, None, "HANGUL SYLLABLE SSAEG", 0x31, "Hangul"),
    c(0xC316, None, "HANGUL SYLLABLE SSAEGG", 0x31, "Hangul"),
    c(0xC317, None, "HANGUL SYLLABLE SSAEGS", 0x31, "Hangul"),
    c(0xC318, None, "HANGUL SYLLABLE SSAEN", 0x31, "Hangul"),
    c(0xC319, None, "HANGUL SYLLABLE SSAENJ", 0x31, "Hangul"),
    c(0xC31A, None, "HANGUL SYLLABLE SSAENH", 0x31, "Hangul"),
    c(0xC31B, None, "HANGUL SYLLABLE SSAED", 0x31, "Hangul"),
    c(0xC31C, None, "HANGUL SYLLABLE SSAEL", 0x31, "Hangul"),
    c(0xC31D, None, "HANGUL SYLLABLE SSAELG", 0x31, "Hangul"),
    c(0xC31E, None, "HANGUL SYLLABLE SSAELM", 0x31, "Hangul"),
    c(0xC31F, None, "HANGUL SYLLABLE SSAELB", 0x31, "Hangul"),
    c(0xC320, None, "HANGUL SYLLABLE SSAELS", 0x31, "Hangul"),
    c(0xC321, None, "HANGUL SYLLABLE SSAELT", 0x31, "Hangul"),
    c(0xC322, None, "HANGUL SYLLABLE SSAELP", 0x31, "Hangul"),
    c(0xC323, None, "HANGUL SYLLABLE SSAELH", 0x31, "Hangul"),
    c(0xC324, None, "HANGUL SYLLABLE SSAEM", 0x31, "Hangul"),
    c(0xC325, None, "HANGUL SYLLABLE SSAEB", 0x31, "Hangul"),
    c(0xC326, None, "HANGUL SYLLABLE SSAEBS", 0x31, "Hangul"),
    c(0xC327, None, "HANGUL SYLLABLE SSAES", 0x31, "Hangul"),
    c(0xC328, None, "HANGUL SYLLABLE SSAESS", 0x31, "Hangul"),
    c(0xC329, None, "HANGUL SYLLABLE SSAENG", 0x31, "Hangul"),
    c(0xC32A, None, "HANGUL SYLLABLE SSAEJ", 0x31, "Hangul"),
    c(0xC32B, None, "HANGUL SYLLABLE SSAEC", 0x31, "Hangul"),
    c(0xC32C, None, "HANGUL SYLLABLE SSAEK", 0x31, "Hangul"),
    c(0xC32D, None, "HANGUL SYLLABLE SSAET", 0x31, "Hangul"),
    c(0xC32E, None, "HANGUL SYLLABLE SSAEP", 0x31, "Hangul"),
    c(0xC32F, None, "HANGUL SYLLABLE SSAEH", 0x31, "Hangul"),
    c(0xC330, None, "HANGUL SYLLABLE SSYA", 0x31, "Hangul"),
    c(0xC331, None, "HANGUL SYLLABLE SSYAG", 0x31, "Hangul"),
    c(0xC332, None, "HANGUL SYLLABLE SSYAGG", 0x31, "Hangul"),
    c(0xC333, None, "HANGUL SYLLABLE SSYAGS", 0x31, "Hangul"),
    c(0xC334, None, "HANGUL SYLLABLE SSYAN", 0x31, "Hangul"),
    c(0xC335, None, "HANGUL SYLLABLE SSYANJ", 0x31, "Hangul"),
    c(0xC336, None, "HANGUL SYLLABLE SSYANH", 0x31, "Hangul"),
    c(0xC337, None, "HANGUL SYLLABLE SSYAD", 0x31, "Hangul"),
    c(0xC338, None, "HANGUL SYLLABLE SSYAL", 0x31, "Hangul"),
    c(0xC339, None, "HANGUL SYLLABLE SSYALG", 0x31, "Hangul"),
    c(0xC33A, None, "HANGUL SYLLABLE SSYALM", 0x31, "Hangul"),
    c(0xC33B, None, "HANGUL SYLLABLE SSYALB", 0x31, "Hangul"),
    c(0xC33C, None, "HANGUL SYLLABLE SSYALS", 0x31, "Hangul"),
    c(0xC33D, None, "HANGUL SYLLABLE SSYALT", 0x31, "Hangul"),
    c(0xC33E, None, "HANGUL SYLLABLE SSYALP", 0x31, "Hangul"),
    c(0xC33F, None, "HANGUL SYLLABLE SSYALH", 0x31, "Hangul"),
    c(0xC340, None, "HANGUL SYLLABLE SSYAM", 0x31, "Hangul"),
    c(0xC341, None, "HANGUL SYLLABLE SSYAB", 0x31, "Hangul"),
    c(0xC342, None, "HANGUL SYLLABLE SSYABS", 0x31, "Hangul"),
    c(0xC343, None, "HANGUL SYLLABLE SSYAS", 0x31, "Hangul"),
    c(0xC344, None, "HANGUL SYLLABLE SSYASS", 0x31, "Hangul"),
    c(0xC345, None, "HANGUL SYLLABLE SSYANG", 0x31, "Hangul"),
    c(0xC346, None, "HANGUL SYLLABLE SSYAJ", 0x31, "Hangul"),
    c(0xC347, None, "HANGUL SYLLABLE SSYAC", 0x31, "Hangul"),
    c(0xC348, None, "HANGUL SYLLABLE SSYAK", 0x31, "Hangul"),
    c(0xC349, None, "HANGUL SYLLABLE SSYAT", 0x31, "Hangul"),
    c(0xC34A, None, "HANGUL SYLLABLE SSYAP", 0x31, "Hangul"),
    c(0xC34B, None, "HANGUL SYLLABLE SSYAH", 0x31, "Hangul"),
    c(0xC34C, None, "HANGUL SYLLABLE SSYAE", 0x31, "Hangul"),
    c(0xC34D, None, "HANGUL SYLLABLE SSYAEG", 0x31, "Hangul"),
    c(0xC34E, None, "HANGUL SYLLABLE SSYAEGG", 0x31, "Hangul"),
    c(0xC34F, None, "HANGUL SYLLABLE SSYAEGS", 0x31, "Hangul"),
    c(0xC350, None, "HANGUL SYLLABLE SSYAEN", 0x31, "Hangul"),
    c(0xC351, None, "HANGUL SYLLABLE SSYAENJ", 0x31, "Hangul"),
    c(0xC352, None, "HANGUL SYLLABLE SSYAENH", 0x31, "Hangul"),
    c(0xC353, None, "HANGUL SYLLABLE SSYAED", 0x31, "Hangul"),
    c(0xC354, None, "HANGUL SYLLABLE SSYAEL", 0x31, "Hangul"),
    c(0xC355, None, "HANGUL SYLLABLE SSYAELG", 0x31, "Hangul"),
    c(0xC356, None, "HANGUL SYLLABLE SSYAELM", 0x31, "Hangul"),
    c(0xC357, None, "HANGUL SYLLABLE SSYAELB", 0x31, "Hangul"),
    c(0xC358, None, "HANGUL SYLLABLE SSYAELS", 0x31, "Hangul"),
    c(0xC359, None, "HANGUL SYLLABLE SSYAELT", 0x31, "Hangul"),
    c(0xC35A, None, "HANGUL SYLLABLE SSYAELP", 0x31, "Hangul"),
    c(0xC35B, None, "HANGUL SYLLABLE SSYAELH", 0x31, "Hangul"),
    c(0xC35C, None, "HANGUL SYLLABLE SSYAEM", 0x31, "Hangul"),
    c(0xC35D, None, "HANGUL SYLLABLE SSYAEB", 0x31, "Hangul"),
    c(0xC35E, None, "HANGUL SYLLABLE SSYAEBS", 0x31, "Hangul"),
    c(0xC35F, None, "HANGUL SYLLABLE SSYAES", 0x31, "Hangul"),
    c(0xC360, None, "HANGUL SYLLABLE SSYAESS", 0x31, "Hangul"),
    c(0xC361, None, "HANGUL SYLLABLE SSYAENG", 0x31, "Hangul"),
    c(0xC362, None, "HANGUL SYLLABLE SSYAEJ", 0x31, "Hangul"),
    c(0xC363, None, "HANGUL SYLLABLE SSYAEC", 0x31, "Hangul"),
    c(0xC364, None, "HANGUL SYLLABLE SSYAEK", 0x31, "Hangul"),
    c(0xC365, None, "HANGUL SYLLABLE SSYAET", 0x31, "Hangul"),
    c(0xC366, None, "HANGUL SYLLABLE SSYAEP", 0x31, "Hangul"),
    c(0xC367, None, "HANGUL SYLLABLE SSYAEH", 0x31, "Hangul"),
    c(0xC368, None, "HANGUL SYLLABLE SSEO", 0x31, "Hangul"),
    c(0xC369, None, "HANGUL SYLLABLE SSEOG", 0x31, "Hangul"),
    c(0xC36A, None, "HANGUL SYLLABLE SSEOGG", 0x31, "Hangul"),
    c(0xC36B, None, "HANGUL SYLLABLE SSEOGS", 0x31, "Hangul"),
    c(0xC36C, None, "HANGUL SYLLABLE SSEON", 0x31, "Hangul"),
    c(0xC36D, None, "HANGUL SYLLABLE SSEONJ", 0x31, "Hangul"),
    c(0xC36E, None, "HANGUL SYLLABLE SSEONH", 0x31, "Hangul"),
    c(0xC36F, None, "HANGUL SYLLABLE SSEOD", 0x31, "Hangul"),
    c(0xC370, None, "HANGUL SYLLABLE SSEOL", 0x31, "Hangul"),
    c(0xC371, None, "HANGUL SYLLABLE SSEOLG", 0x31, "Hangul"),
    c(0xC372, None, "HANGUL SYLLABLE SSEOLM", 0x31, "Hangul"),
    c(0xC373, None, "HANGUL SYLLABLE SSEOLB", 0x31, "Hangul"),
    c(0xC374, None, "HANGUL SYLLABLE SSEOLS", 0x31, "Hangul"),
    c(0xC375, None, "HANGUL SYLLABLE SSEOLT", 0x31, "Hangul"),
    c(0xC376, None, "HANGUL SYLLABLE SSEOLP", 0x31, "Hangul"),
    c(0xC377, None, "HANGUL SYLLABLE SSEOLH", 0x31, "Hangul"),
    c(0xC378, None, "HANGUL SYLLABLE SSEOM", 0x31, "Hangul"),
    c(0xC379, None, "HANGUL SYLLABLE SSEOB", 0x31, "Hangul"),
    c(0xC37A, None, "HANGUL SYLLABLE SSEOBS", 0x31, "Hangul"),
    c(0xC37B, None, "HANGUL SYLLABLE SSEOS", 0x31, "Hangul"),
    c(0xC37C, None, "HANGUL SYLLABLE SSEOSS", 0x31, "Hangul"),
    c(0xC37D, None, "HANGUL SYLLABLE SSEONG", 0x31, "Hangul"),
    c(0xC37E, None, "HANGUL SYLLABLE SSEOJ", 0x31, "Hangul"),
    c(0xC37F, None, "HANGUL SYLLABLE SSEOC", 0x31, "Hangul"),
    c(0xC380, None, "HANGUL SYLLABLE SSEOK", 0x31, "Hangul"),
    c(0xC381, None, "HANGUL SYLLABLE SSEOT", 0x31, "Hangul"),
    c(0xC382, None, "HANGUL SYLLABLE SSEOP", 0x31, "Hangul"),
    c(0xC383, None, "HANGUL SYLLABLE SSEOH", 0x31, "Hangul"),
    c(0xC384, None, "HANGUL SYLLABLE SSE", 0x31, "Hangul"),
    c(0xC385, None, "HANGUL SYLLABLE SSEG", 0x31, "Hangul"),
    c(0xC386, None, "HANGUL SYLLABLE SSEGG", 0x31, "Hangul"),
    c(0xC387, None, "HANGUL SYLLABLE SSEGS", 0x31, "Hangul"),
    c(0xC388, None, "HANGUL SYLLABLE SSEN", 0x31, "Hangul"),
    c(0xC389, None, "HANGUL SYLLABLE SSENJ", 0x31, "Hangul"),
    c(0xC38A, None, "HANGUL SYLLABLE SSENH", 0x31, "Hangul"),
    c(0xC38B, None, "HANGUL SYLLABLE SSED", 0x31, "Hangul"),
    c(0xC38C, None, "HANGUL SYLLABLE SSEL", 0x31, "Hangul"),
    c(0xC38D, None, "HANGUL SYLLABLE SSELG", 0x31, "Hangul"),
    c(0xC38E, None, "HANGUL SYLLABLE SSELM", 0x31, "Hangul"),
    c(0xC38F, None, "HANGUL SYLLABLE SSELB", 0x31, "Hangul"),
    c(0xC390, None, "HANGUL SYLLABLE SSELS", 0x31, "Hangul"),
    c(0xC391, None, "HANGUL SYLLABLE SSELT", 0x31, "Hangul"),
    c(0xC392, None, "HANGUL SYLLABLE SSELP", 0x31, "Hangul"),
    c(0xC393, None, "HANGUL SYLLABLE SSELH", 0x31, "Hangul"),
    c(0xC394, None, "HANGUL SYLLABLE SSEM", 0x31, "Hangul"),
    c(0xC395, None, "HANGUL SYLLABLE SSEB", 0x31, "Hangul"),
    c(0xC396, None, "HANGUL SYLLABLE SSEBS", 0x31, "Hangul"),
    c(0xC397, None, "HANGUL SYLLABLE SSES", 0x31, "Hangul"),
    c(0xC398, None, "HANGUL SYLLABLE SSESS", 0x31, "Hangul"),
    c(0xC399, None, "HANGUL SYLLABLE SSENG", 0x31, "Hangul"),
    c(0xC39A, None, "HANGUL SYLLABLE SSEJ", 0x31, "Hangul"),
    c(0xC39B, None, "HANGUL SYLLABLE SSEC", 0x31, "Hangul"),
    c(0xC39C, None, "HANGUL SYLLABLE SSEK", 0x31, "Hangul"),
    c(0xC39D, None, "HANGUL SYLLABLE SSET", 0x31, "Hangul"),
    c(0xC39E, None, "HANGUL SYLLABLE SSEP", 0x31, "Hangul"),
    c(0xC39F, None, "HANGUL SYLLABLE SSEH", 0x31, "Hangul"),
    c(0xC3A0, None, "HANGUL SYLLABLE SSYEO", 0x31, "Hangul"),
    c(0xC3A1, None, "HANGUL SYLLABLE SSYEOG", 0x31, "Hangul"),
    c(0xC3A2, None, "HANGUL SYLLABLE SSYEOGG", 0x31, "Hangul"),
    c(0xC3A3, None, "HANGUL SYLLABLE SSYEOGS", 0x31, "Hangul"),
    c(0xC3A4, None, "HANGUL SYLLABLE SSYEON", 0x31, "Hangul"),
    c(0xC3A5, None, "HANGUL SYLLABLE SSYEONJ", 0x31, "Hangul"),
    c(0xC3A6, None, "HANGUL SYLLABLE SSYEONH", 0x31, "Hangul"),
    c(0xC3A7, None, "HANGUL SYLLABLE SSYEOD", 0x31, "Hangul"),
    c(0xC3A8, None, "HANGUL SYLLABLE SSYEOL", 0x31, "Hangul"),
    c(0xC3A9, None, "HANGUL SYLLABLE SSYEOLG", 0x31, "Hangul"),
    c(0xC3AA, None, "HANGUL SYLLABLE SSYEOLM", 0x31, "Hangul"),
    c(0xC3AB, None, "HANGUL SYLLABLE SSYEOLB", 0x31, "Hangul"),
    c(0xC3AC, None, "HANGUL SYLLABLE SSYEOLS", 0x31, "Hangul"),
    c(0xC3AD, None, "HANGUL SYLLABLE SSYEOLT", 0x31, "Hangul"),
    c(0xC3AE, None, "HANGUL SYLLABLE SSYEOLP", 0x31, "Hangul"),
    c(0xC3AF, None, "HANGUL SYLLABLE SSYEOLH", 0x31, "Hangul"),
    c(0xC3B0, None, "HANGUL SYLLABLE SSYEOM", 0x31, "Hangul"),
    c(0xC3B1, None, "HANGUL SYLLABLE SSYEOB", 0x31, "Hangul"),
    c(0xC3B2, None, "HANGUL SYLLABLE SSYEOBS", 0x31, "Hangul"),
    c(0xC3B3, None, "HANGUL SYLLABLE SSYEOS", 0x31, "Hangul"),
    c(0xC3B4, None, "HANGUL SYLLABLE SSYEOSS", 0x31, "Hangul"),
    c(0xC3B5, None, "HANGUL SYLLABLE SSYEONG", 0x31, "Hangul"),
    c(0xC3B6, None, "HANGUL SYLLABLE SSYEOJ", 0x31, "Hangul"),
    c(0xC3B7, None, "HANGUL SYLLABLE SSYEOC", 0x31, "Hangul"),
    c(0xC3B8, None, "HANGUL SYLLABLE SSYEOK", 0x31, "Hangul"),
    c(0xC3B9, None, "HANGUL SYLLABLE SSYEOT", 0x31, "Hangul"),
    c(0xC3BA, None, "HANGUL SYLLABLE SSYEOP", 0x31, "Hangul"),
    c(0xC3BB, None, "HANGUL SYLLABLE SSYEOH", 0x31, "Hangul"),
    c(0xC3BC, None, "HANGUL SYLLABLE SSYE", 0x31, "Hangul"),
    c(0xC3BD, None, "HANGUL SYLLABLE SSYEG", 0x31, "Hangul"),
    c(0xC3BE, None, "HANGUL SYLLABLE SSYEGG", 0x31, "Hangul"),
    c(0xC3BF, None, "HANGUL SYLLABLE SSYEGS", 0x31, "Hangul"),
    c(0xC3C0, None, "HANGUL SYLLABLE SSYEN", 0x31, "Hangul"),
    c(0xC3C1, None, "HANGUL SYLLABLE SSYENJ", 0x31, "Hangul"),
    c(0xC3C2, None, "HANGUL SYLLABLE SSYENH", 0x31, "Hangul"),
    c(0xC3C3, None, "HANGUL SYLLABLE SSYED", 0x31, "Hangul"),
    c(0xC3C4, None, "HANGUL SYLLABLE SSYEL", 0x31, "Hangul"),
    c(0xC3C5, None, "HANGUL SYLLABLE SSYELG", 0x31, "Hangul"),
    c(0xC3C6, None, "HANGUL SYLLABLE SSYELM", 0x31, "Hangul"),
    c(0xC3C7, None, "HANGUL SYLLABLE SSYELB", 0x31, "Hangul"),
    c(0xC3C8, None, "HANGUL SYLLABLE SSYELS", 0x31, "Hangul"),
    c(0xC3C9, None, "HANGUL SYLLABLE SSYELT", 0x31, "Hangul"),
    c(0xC3CA, None, "HANGUL SYLLABLE SSYELP", 0x31, "Hangul"),
    c(0xC3CB, None, "HANGUL SYLLABLE SSYELH", 0x31, "Hangul"),
    c(0xC3CC, None, "HANGUL SYLLABLE SSYEM", 0x31, "Hangul"),
    c(0xC3CD, None, "HANGUL SYLLABLE SSYEB", 0x31, "Hangul"),
    c(0xC3CE, None, "HANGUL SYLLABLE SSYEBS", 0x31, "Hangul"),
    c(0xC3CF, None, "HANGUL SYLLABLE SSYES", 0x31, "Hangul"),
    c(0xC3D0, None, "HANGUL SYLLABLE SSYESS", 0x31, "Hangul"),
    c(0xC3D1, None, "HANGUL SYLLABLE SSYENG", 0x31, "Hangul"),
    c(0xC3D2, None, "HANGUL SYLLABLE SSYEJ", 0x31, "Hangul"),
    c(0xC3D3, None, "HANGUL SYLLABLE SSYEC", 0x31, "Hangul"),
    c(0xC3D4, None, "HANGUL SYLLABLE SSYEK", 0x31, "Hangul"),
    c(0xC3D5, None, "HANGUL SYLLABLE SSYET", 0x31, "Hangul"),
    c(0xC3D6, None, "HANGUL SYLLABLE SSYEP", 0x31, "Hangul"),
    c(0xC3D7, None, "HANGUL SYLLABLE SSYEH", 0x31, "Hangul"),
    c(0xC3D8, None, "HANGUL SYLLABLE SSO", 0x31, "Hangul"),
    c(0xC3D9, None, "HANGUL SYLLABLE SSOG", 0x31, "Hangul"),
    c(0xC3DA, None, "HANGUL SYLLABLE SSOGG", 0x31, "Hangul"),
    c(0xC3DB, None, "HANGUL SYLLABLE SSOGS", 0x31, "Hangul"),
    c(0xC3DC, None, "HANGUL SYLLABLE SSON", 0x31, "Hangul"),
    c(0xC3DD, None, "HANGUL SYLLABLE SSONJ", 0x31, "Hangul"),
    c(0xC3DE, None, "HANGUL SYLLABLE SSONH", 0x31, "Hangul"),
    c(0xC3DF, None, "HANGUL SYLLABLE SSOD", 0x31, "Hangul"),
    c(0xC3E0, None, "HANGUL SYLLABLE SSOL", 0x31, "Hangul"),
    c(0xC3E1, None, "HANGUL SYLLABLE SSOLG", 0x31, "Hangul"),
    c(0xC3E2, None, "HANGUL SYLLABLE SSOLM", 0x31, "Hangul"),
    c(0xC3E3, None, "HANGUL SYLLABLE SSOLB", 0x31, "Hangul"),
    c(0xC3E4, None, "HANGUL SYLLABLE SSOLS", 0x31, "Hangul"),
    c(0xC3E5, None, "HANGUL SYLLABLE SSOLT", 0x31, "Hangul"),
    c(0xC3E6, None, "HANGUL SYLLABLE SSOLP", 0x31, "Hangul"),
    c(0xC3E7, None, "HANGUL SYLLABLE SSOLH", 0x31, "Hangul"),
    c(0xC3E8, None, "HANGUL SYLLABLE SSOM", 0x31, "Hangul"),
    c(0xC3E9, None, "HANGUL SYLLABLE SSOB", 0x31, "Hangul"),
    c(0xC3EA, None, "HANGUL SYLLABLE SSOBS", 0x31, "Hangul"),
    c(0xC3EB, None, "HANGUL SYLLABLE SSOS", 0x31, "Hangul"),
    c(0xC3EC, None, "HANGUL SYLLABLE SSOSS", 0x31, "Hangul"),
    c(0xC3ED, None, "HANGUL SYLLABLE SSONG", 0x31, "Hangul"),
    c(0xC3EE, None, "HANGUL SYLLABLE SSOJ", 0x31, "Hangul"),
    c(0xC3EF, None, "HANGUL SYLLABLE SSOC", 0x31, "Hangul"),
    c(0xC3F0, None, "HANGUL SYLLABLE SSOK", 0x31, "Hangul"),
    c(0xC3F1, None, "HANGUL SYLLABLE SSOT", 0x31, "Hangul"),
    c(0xC3F2, None, "HANGUL SYLLABLE SSOP", 0x31, "Hangul"),
    c(0xC3F3, None, "HANGUL SYLLABLE SSOH", 0x31, "Hangul"),
    c(0xC3F4, None, "HANGUL SYLLABLE SSWA", 0x31, "Hangul"),
    c(0xC3F5, None, "HANGUL SYLLABLE SSWAG", 0x31, "Hangul"),
    c(0xC3F6, None, "HANGUL SYLLABLE SSWAGG", 0x31, "Hangul"),
    c(0xC3F7, None, "HANGUL SYLLABLE SSWAGS", 0x31, "Hangul"),
    c(0xC3F8, None, "HANGUL SYLLABLE SSWAN", 0x31, "Hangul"),
    c(0xC3F9, None, "HANGUL SYLLABLE SSWANJ", 0x31, "Hangul"),
    c(0xC3FA, None, "HANGUL SYLLABLE SSWANH", 0x31, "Hangul"),
    c(0xC3FB, None, "HANGUL SYLLABLE SSWAD", 0x31, "Hangul"),
    c(0xC3FC, None, "HANGUL SYLLABLE SSWAL", 0x31, "Hangul"),
    c(0xC3FD, None, "HANGUL SYLLABLE SSWALG", 0x31, "Hangul"),
    c(0xC3FE, None, "HANGUL SYLLABLE SSWALM", 0x31, "Hangul"),
    c(0xC3FF, None, "HANGUL SYLLABLE SSWALB", 0x31, "Hangul"),
    c(0xC400, None, "HANGUL SYLLABLE SSWALS", 0x31, "Hangul"),
    c(0xC401, None, "HANGUL SYLLABLE SSWALT", 0x31, "Hangul"),
    c(0xC402, None, "HANGUL SYLLABLE SSWALP", 0x31, "Hangul"),
    c(0xC403, None, "HANGUL SYLLABLE SSWALH", 0x31, "Hangul"),
    c(0xC404, None, "HANGUL SYLLABLE SSWAM", 0x31, "Hangul"),
    c(0xC405, None, "HANGUL SYLLABLE SSWAB", 0x31, "Hangul"),
    c(0xC406, None, "HANGUL SYLLABLE SSWABS", 0x31, "Hangul"),
    c(0xC407, None, "HANGUL SYLLABLE SSWAS", 0x31, "Hangul"),
    c(0xC408, None, "HANGUL SYLLABLE SSWASS", 0x31, "Hangul"),
    c(0xC409, None, "HANGUL SYLLABLE SSWANG", 0x31, "Hangul"),
    c(0xC40A, None, "HANGUL SYLLABLE SSWAJ", 0x31, "Hangul"),
    c(0xC40B, None, "HANGUL SYLLABLE SSWAC", 0x31, "Hangul"),
    c(0xC40C, None, "HANGUL SYLLABLE SSWAK", 0x31, "Hangul"),
    c(0xC40D, None, "HANGUL SYLLABLE SSWAT", 0x31, "Hangul"),
    c(0xC40E, None, "HANGUL SYLLABLE SSWAP", 0x31, "Hangul"),
    c(0xC40F, None, "HANGUL SYLLABLE SSWAH", 0x31, "Hangul"),
    c(0xC410, None, "HANGUL SYLLABLE SSWAE", 0x31, "Hangul"),
    c(0xC411, None, "HANGUL SYLLABLE SSWAEG", 0x31, "Hangul"),
    c(0xC412, None, "HANGUL SYLLABLE SSWAEGG", 0x31, "Hangul"),
    c(0xC413, None, "HANGUL SYLLABLE SSWAEGS", 0x31, "Hangul"),
    c(0xC414, None, "HANGUL SYLLABLE SSWAEN", 0x31, "Hangul"),
    c(0xC415, None, "HANGUL SYLLABLE SSWAENJ", 0x31, "Hangul"),
    c(0xC416, None, "HANGUL SYLLABLE SSWAENH", 0x31, "Hangul"),
    c(0xC417, None, "HANGUL SYLLABLE SSWAED", 0x31, "Hangul"),
    c(0xC418, None, "HANGUL SYLLABLE SSWAEL", 0x31, "Hangul"),
    c(0xC419, None, "HANGUL SYLLABLE SSWAELG", 0x31, "Hangul"),
    c(0xC41A, None, "HANGUL SYLLABLE SSWAELM", 0x31, "Hangul"),
    c(0xC41B, None, "HANGUL SYLLABLE SSWAELB", 0x31, "Hangul"),
    c(0xC41C, None, "HANGUL SYLLABLE SSWAELS", 0x31, "Hangul"),
    c(0xC41D, None, "HANGUL SYLLABLE SSWAELT", 0x31, "Hangul"),
    c(0xC41E, None, "HANGUL SYLLABLE SSWAELP", 0x31, "Hangul"),
    c(0xC41F, None, "HANGUL SYLLABLE SSWAELH", 0x31, "Hangul"),
    c(0xC420, None, "HANGUL SYLLABLE SSWAEM", 0x31, "Hangul"),
    c(0xC421, None, "HANGUL SYLLABLE SSWAEB", 0x31, "Hangul"),
    c(0xC422, None, "HANGUL SYLLABLE SSWAEBS", 0x31, "Hangul"),
    c(0xC423, None, "HANGUL SYLLABLE SSWAES", 0x31, "Hangul"),
    c(0xC424, None, "HANGUL SYLLABLE SSWAESS", 0x31, "Hangul"),
    c(0xC425, None, "HANGUL SYLLABLE SSWAENG", 0x31, "Hangul"),
    c(0xC426, None, "HANGUL SYLLABLE SSWAEJ", 0x31, "Hangul"),
    c(0xC427, None, "HANGUL SYLLABLE SSWAEC", 0x31, "Hangul"),
    c(0xC428, None, "HANGUL SYLLABLE SSWAEK", 0x31, "Hangul"),
    c(0xC429, None, "HANGUL SYLLABLE SSWAET", 0x31, "Hangul"),
    c(0xC42A, None, "HANGUL SYLLABLE SSWAEP", 0x31, "Hangul"),
    c(0xC42B, None, "HANGUL SYLLABLE SSWAEH", 0x31, "Hangul"),
    c(0xC42C, None, "HANGUL SYLLABLE SSOE", 0x31, "Hangul"),
    c(0xC42D, None, "HANGUL SYLLABLE SSOEG", 0x31, "Hangul"),
    c(0xC42E, None, "HANGUL SYLLABLE SSOEGG", 0x31, "Hangul"),
    c(0xC42F, None, "HANGUL SYLLABLE SSOEGS", 0x31, "Hangul"),
    c(0xC430, None, "HANGUL SYLLABLE SSOEN", 0x31, "Hangul"),
    c(0xC431, None, "HANGUL SYLLABLE SSOENJ", 0x31, "Hangul"),
    c(0xC432, None, "HANGUL SYLLABLE SSOENH", 0x31, "Hangul"),
    c(0xC433, None, "HANGUL SYLLABLE SSOED", 0x31, "Hangul"),
    c(0xC434, None, "HANGUL SYLLABLE SSOEL", 0x31, "Hangul"),
    c(0xC435, None, "HANGUL SYLLABLE SSOELG", 0x31, "Hangul"),
    c(0xC436, None, "HANGUL SYLLABLE SSOELM", 0x31, "Hangul"),
    c(0xC437, None, "HANGUL SYLLABLE SSOELB", 0x31, "Hangul"),
    c(0xC438, None, "HANGUL SYLLABLE SSOELS", 0x31, "Hangul"),
    c(0xC439, None, "HANGUL SYLLABLE SSOELT", 0x31, "Hangul"),
    c(0xC43A, None, "HANGUL SYLLABLE SSOELP", 0x31, "Hangul"),
    c(0xC43B, None, "HANGUL SYLLABLE SSOELH", 0x31, "Hangul"),
    c(0xC43C, None, "HANGUL SYLLABLE SSOEM", 0x31, "Hangul"),
    c(0xC43D, None, "HANGUL SYLLABLE SSOEB", 0x31, "Hangul"),
    c(0xC43E, None, "HANGUL SYLLABLE SSOEBS", 0x31, "Hangul"),
    c(0xC43F, None, "HANGUL SYLLABLE SSOES", 0x31, "Hangul"),
    c(0xC440, None, "HANGUL SYLLABLE SSOESS", 0x31, "Hangul"),
    c(0xC441, None, "HANGUL SYLLABLE SSOENG", 0x31, "Hangul"),
    c(0xC442, None, "HANGUL SYLLABLE SSOEJ", 0x31, "Hangul"),
    c(0xC443, None, "HANGUL SYLLABLE SSOEC", 0x31, "Hangul"),
    c(0xC444, None, "HANGUL SYLLABLE SSOEK", 0x31, "Hangul"),
    c(0xC445, None, "HANGUL SYLLABLE SSOET", 0x31, "Hangul"),
    c(0xC446, None, "HANGUL SYLLABLE SSOEP", 0x31, "Hangul"),
    c(0xC447, None, "HANGUL SYLLABLE SSOEH", 0x31, "Hangul"),
    c(0xC448, None, "HANGUL SYLLABLE SSYO", 0x31, "Hangul"),
    c(0xC449, None, "HANGUL SYLLABLE SSYOG", 0x31, "Hangul"),
    c(0xC44A, None, "HANGUL SYLLABLE SSYOGG", 0x31, "Hangul"),
    c(0xC44B, None, "HANGUL SYLLABLE SSYOGS", 0x31, "Hangul"),
    c(0xC44C, None, "HANGUL SYLLABLE SSYON", 0x31, "Hangul"),
    c(0xC44D, None, "HANGUL SYLLABLE SSYONJ", 0x31, "Hangul"),
    c(0xC44E, None, "HANGUL SYLLABLE SSYONH", 0x31, "Hangul"),
    c(0xC44F, None, "HANGUL SYLLABLE SSYOD", 0x31, "Hangul"),
    c(0xC450, None, "HANGUL SYLLABLE SSYOL", 0x31, "Hangul"),
    c(0xC451, None, "HANGUL SYLLABLE SSYOLG", 0x31, "Hangul"),
    c(0xC452, None, "HANGUL SYLLABLE SSYOLM", 0x31, "Hangul"),
    c(0xC453, None, "HANGUL SYLLABLE SSYOLB", 0x31, "Hangul"),
    c(0xC454, None, "HANGUL SYLLABLE SSYOLS", 0x31, "Hangul"),
    c(0xC455, None, "HANGUL SYLLABLE SSYOLT", 0x31, "Hangul"),
    c(0xC456, None, "HANGUL SYLLABLE SSYOLP", 0x31, "Hangul"),
    c(0xC457, None, "HANGUL SYLLABLE SSYOLH", 0x31, "Hangul"),
    c(0xC458, None, "HANGUL SYLLABLE SSYOM", 0x31, "Hangul"),
    c(0xC459, None, "HANGUL SYLLABLE SSYOB", 0x31, "Hangul"),
    c(0xC45A, None, "HANGUL SYLLABLE SSYOBS", 0x31, "Hangul"),
    c(0xC45B, None, "HANGUL SYLLABLE SSYOS", 0x31, "Hangul"),
    c(0xC45C, None, "HANGUL SYLLABLE SSYOSS", 0x31, "Hangul"),
    c(0xC45D, None, "HANGUL SYLLABLE SSYONG", 0x31, "Hangul"),
    c(0xC45E, None, "HANGUL SYLLABLE SSYOJ", 0x31, "Hangul"),
    c(0xC45F, None, "HANGUL SYLLABLE SSYOC", 0x31, "Hangul"),
    c(0xC460, None, "HANGUL SYLLABLE SSYOK", 0x31, "Hangul"),
    c(0xC461, None, "HANGUL SYLLABLE SSYOT", 0x31, "Hangul"),
    c(0xC462, None, "HANGUL SYLLABLE SSYOP", 0x31, "Hangul"),
    c(0xC463, None, "HANGUL SYLLABLE SSYOH", 0x31, "Hangul"),
    c(0xC464, None, "HANGUL SYLLABLE SSU", 0x31, "Hangul"),
    c(0xC465, None, "HANGUL SYLLABLE SSUG", 0x31, "Hangul"),
    c(0xC466, None, "HANGUL SYLLABLE SSUGG", 0x31, "Hangul"),
    c(0xC467, None, "HANGUL SYLLABLE SSUGS", 0x31, "Hangul"),
    c(0xC468, None, "HANGUL SYLLABLE SSUN", 0x31, "Hangul"),
    c(0xC469, None, "HANGUL SYLLABLE SSUNJ", 0x31, "Hangul"),
    c(0xC46A, None, "HANGUL SYLLABLE SSUNH", 0x31, "Hangul"),
    c(0xC46B, None, "HANGUL SYLLABLE SSUD", 0x31, "Hangul"),
    c(0xC46C, None, "HANGUL SYLLABLE SSUL", 0x31, "Hangul"),
    c(0xC46D, None, "HANGUL SYLLABLE SSULG", 0x31, "Hangul"),
    c(0xC46E, None, "HANGUL SYLLABLE SSULM", 0x31, "Hangul"),
    c(0xC46F, None, "HANGUL SYLLABLE SSULB", 0x31, "Hangul"),
    c(0xC470, None, "HANGUL SYLLABLE SSULS", 0x31, "Hangul"),
    c(0xC471, None, "HANGUL SYLLABLE SSULT", 0x31, "Hangul"),
    c(0xC472, None, "HANGUL SYLLABLE SSULP", 0x31, "Hangul"),
    c(0xC473, None, "HANGUL SYLLABLE SSULH", 0x31, "Hangul"),
    c(0xC474, None, "HANGUL SYLLABLE SSUM", 0x31, "Hangul"),
    c(0xC475, None, "HANGUL SYLLABLE SSUB", 0x31, "Hangul"),
    c(0xC476, None, "HANGUL SYLLABLE SSUBS", 0x31, "Hangul"),
    c(0xC477, None, "HANGUL SYLLABLE SSUS", 0x31, "Hangul"),
    c(0xC478, None, "HANGUL SYLLABLE SSUSS", 0x31, "Hangul"),
    c(0xC479, None, "HANGUL SYLLABLE SSUNG", 0x31, "Hangul"),
    c(0xC47A, None, "HANGUL SYLLABLE SSUJ", 0x31, "Hangul"),
    c(0xC47B, None, "HANGUL SYLLABLE SSUC", 0x31, "Hangul"),
    c(0xC47C, None, "HANGUL SYLLABLE SSUK", 0x31, "Hangul"),
    c(0xC47D, None, "HANGUL SYLLABLE SSUT", 0x31, "Hangul"),
    c(0xC47E, None, "HANGUL SYLLABLE SSUP", 0x31, "Hangul"),
    c(0xC47F, None, "HANGUL SYLLABLE SSUH", 0x31, "Hangul"),
    c(0xC480, None, "HANGUL SYLLABLE SSWEO", 0x31, "Hangul"),
    c(0xC481, None, "HANGUL SYLLABLE SSWEOG", 0x31, "Hangul"),
    c(0xC482, None, "HANGUL SYLLABLE SSWEOGG", 0x31, "Hangul"),
    c(0xC483, None, "HANGUL SYLLABLE SSWEOGS", 0x31, "Hangul"),
    c(0xC484, None, "HANGUL SYLLABLE SSWEON", 0x31, "Hangul"),
    c(0xC485, None, "HANGUL SYLLABLE SSWEONJ", 0x31, "Hangul"),
    c(0xC486, None, "HANGUL SYLLABLE SSWEONH", 0x31, "Hangul"),
    c(0xC487, None, "HANGUL SYLLABLE SSWEOD", 0x31, "Hangul"),
    c(0xC488, None, "HANGUL SYLLABLE SSWEOL", 0x31, "Hangul"),
    c(0xC489, None, "HANGUL SYLLABLE SSWEOLG", 0x31, "Hangul"),
    c(0xC48A, None, "HANGUL SYLLABLE SSWEOLM", 0x31, "Hangul"),
    c(0xC48B, None, "HANGUL SYLLABLE SSWEOLB", 0x31, "Hangul"),
    c(0xC48C, None, "HANGUL SYLLABLE SSWEOLS", 0x31, "Hangul"),
    c(0xC48D, None, "HANGUL SYLLABLE SSWEOLT", 0x31, "Hangul"),
    c(0xC48E, None, "HANGUL SYLLABLE SSWEOLP", 0x31, "Hangul"),
    c(0xC48F, None, "HANGUL SYLLABLE SSWEOLH", 0x31, "Hangul"),
    c(0xC490, None, "HANGUL SYLLABLE SSWEOM", 0x31, "Hangul"),
    c(0xC491, None, "HANGUL SYLLABLE SSWEOB", 0x31, "Hangul"),
    c(0xC492, None, "HANGUL SYLLABLE SSWEOBS", 0x31, "Hangul"),
    c(0xC493, None, "HANGUL SYLLABLE SSWEOS", 0x31, "Hangul"),
    c(0xC494, None, "HANGUL SYLLABLE SSWEOSS", 0x31, "Hangul"),
    c(0xC495, None, "HANGUL SYLLABLE SSWEONG", 0x31, "Hangul"),
    c(0xC496, None, "HANGUL SYLLABLE SSWEOJ", 0x31, "Hangul"),
    c(0xC497, None, "HANGUL SYLLABLE SSWEOC", 0x31, "Hangul"),
    c(0xC498, None, "HANGUL SYLLABLE SSWEOK", 0x31, "Hangul"),
    c(0xC499, None, "HANGUL SYLLABLE SSWEOT", 0x31, "Hangul"),
    c(0xC49A, None, "HANGUL SYLLABLE SSWEOP", 0x31, "Hangul"),
    c(0xC49B, None, "HANGUL SYLLABLE SSWEOH", 0x31, "Hangul"),
    c(0xC49C, None, "HANGUL SYLLABLE SSWE", 0x31, "Hangul"),
    c(0xC49D, None, "HANGUL SYLLABLE SSWEG", 0x31, "Hangul"),
    c(0xC49E, None, "HANGUL SYLLABLE SSWEGG", 0x31, "Hangul"),
    c(0xC49F, None, "HANGUL SYLLABLE SSWEGS", 0x31, "Hangul"),
    c(0xC4A0, None, "HANGUL SYLLABLE SSWEN", 0x31, "Hangul"),
    c(0xC4A1, None, "HANGUL SYLLABLE SSWENJ", 0x31, "Hangul"),
    c(0xC4A2, None, "HANGUL SYLLABLE SSWENH", 0x31, "Hangul"),
    c(0xC4A3, None, "HANGUL SYLLABLE SSWED", 0x31, "Hangul"),
    c(0xC4A4, None, "HANGUL SYLLABLE SSWEL", 0x31, "Hangul"),
    c(0xC4A5, None, "HANGUL SYLLABLE SSWELG", 0x31, "Hangul"),
    c(0xC4A6, None, "HANGUL SYLLABLE SSWELM", 0x31, "Hangul"),
    c(0xC4A7, None, "HANGUL SYLLABLE SSWELB", 0x31, "Hangul"),
    c(0xC4A8, None, "HANGUL SYLLABLE SSWELS", 0x31, "Hangul"),
    c(0xC4A9, None, "HANGUL SYLLABLE SSWELT", 0x31, "Hangul"),
    c(0xC4AA, None, "HANGUL SYLLABLE SSWELP", 0x31, "Hangul"),
    c(0xC4AB, None, "HANGUL SYLLABLE SSWELH", 0x31, "Hangul"),
    c(0xC4AC, None, "HANGUL SYLLABLE SSWEM", 0x31, "Hangul"),
    c(0xC4AD, None, "HANGUL SYLLABLE SSWEB", 0x31, "Hangul"),
    c(0xC4AE, None, "HANGUL SYLLABLE SSWEBS", 0x31, "Hangul"),
    c(0xC4AF, None, "HANGUL SYLLABLE SSWES", 0x31, "Hangul"),
    c(0xC4B0, None, "HANGUL SYLLABLE SSWESS", 0x31, "Hangul"),
    c(0xC4B1, None, "HANGUL SYLLABLE SSWENG", 0x31, "Hangul"),
    c(0xC4B2, None, "HANGUL SYLLABLE SSWEJ", 0x31, "Hangul"),
    c(0xC4B3, None, "HANGUL SYLLABLE SSWEC", 0x31, "Hangul"),
    c(0xC4B4, None, "HANGUL SYLLABLE SSWEK", 0x31, "Hangul"),
    c(0xC4B5, None, "HANGUL SYLLABLE SSWET", 0x31, "Hangul"),
    c(0xC4B6, None, "HANGUL SYLLABLE SSWEP", 0x31, "Hangul"),
    c(0xC4B7, None, "HANGUL SYLLABLE SSWEH", 0x31, "Hangul"),
    c(0xC4B8, None, "HANGUL SYLLABLE SSWI", 0x31, "Hangul"),
    c(0xC4B9, None, "HANGUL SYLLABLE SSWIG", 0x31, "Hangul"),
    c(0xC4BA, None, "HANGUL SYLLABLE SSWIGG", 0x31, "Hangul"),
    c(0xC4BB, None, "HANGUL SYLLABLE SSWIGS", 0x31, "Hangul"),
    c(0xC4BC, None, "HANGUL SYLLABLE SSWIN", 0x31, "Hangul"),
    c(0xC4BD, None, "HANGUL SYLLABLE SSWINJ", 0x31, "Hangul"),
    c(0xC4BE, None, "HANGUL SYLLABLE SSWINH", 0x31, "Hangul"),
    c(0xC4BF, None, "HANGUL SYLLABLE SSWID", 0x31, "Hangul"),
    c(0xC4C0, None, "HANGUL SYLLABLE SSWIL", 0x31, "Hangul"),
    c(0xC4C1, None, "HANGUL SYLLABLE SSWILG", 0x31, "Hangul"),
    c(0xC4C2, None, "HANGUL SYLLABLE SSWILM", 0x31, "Hangul"),
    c(0xC4C3, None, "HANGUL SYLLABLE SSWILB", 0x31, "Hangul"),
    c(0xC4C4, None, "HANGUL SYLLABLE SSWILS", 0x31, "Hangul"),
    c(0xC4C5, None, "HANGUL SYLLABLE SSWILT", 0x31, "Hangul"),
    c(0xC4C6, None, "HANGUL SYLLABLE SSWILP", 0x31, "Hangul"),
    c(0xC4C7, None, "HANGUL SYLLABLE SSWILH", 0x31, "Hangul"),
    c(0xC4C8, None, "HANGUL SYLLABLE SSWIM", 0x31, "Hangul"),
    c(0xC4C9, None, "HANGUL SYLLABLE SSWIB", 0x31, "Hangul"),
    c(0xC4CA, None, "HANGUL SYLLABLE SSWIBS", 0x31, "Hangul"),
    c(0xC4CB, None, "HANGUL SYLLABLE SSWIS", 0x31, "Hangul"),
    c(0xC4CC, None, "HANGUL SYLLABLE SSWISS", 0x31, "Hangul"),
    c(0xC4CD, None, "HANGUL SYLLABLE SSWING", 0x31, "Hangul"),
    c(0xC4CE, None, "HANGUL SYLLABLE SSWIJ", 0x31, "Hangul"),
    c(0xC4CF, None, "HANGUL SYLLABLE SSWIC", 0x31, "Hangul"),
    c(0xC4D0, None, "HANGUL SYLLABLE SSWIK", 0x31, "Hangul"),
    c(0xC4D1, None, "HANGUL SYLLABLE SSWIT", 0x31, "Hangul"),
    c(0xC4D2, None, "HANGUL SYLLABLE SSWIP", 0x31, "Hangul"),
    c(0xC4D3, None, "HANGUL SYLLABLE SSWIH", 0x31, "Hangul"),
    c(0xC4D4, None, "HANGUL SYLLABLE SSYU", 0x31, "Hangul"),
    c(0xC4D5, None, "HANGUL SYLLABLE SSYUG", 0x31, "Hangul"),
    c(0xC4D6, None, "HANGUL SYLLABLE SSYUGG", 0x31, "Hangul"),
    c(0xC4D7, None, "HANGUL SYLLABLE SSYUGS", 0x31, "Hangul"),
    c(0xC4D8, None, "HANGUL SYLLABLE SSYUN", 0x31, "Hangul"),
    c(0xC4D9, None, "HANGUL SYLLABLE SSYUNJ", 0x31, "Hangul"),
    c(0xC4DA, None, "HANGUL SYLLABLE SSYUNH", 0x31, "Hangul"),
    c(0xC4DB, None, "HANGUL SYLLABLE SSYUD", 0x31, "Hangul"),
    c(0xC4DC, None, "HANGUL SYLLABLE SSYUL", 0x31, "Hangul"),
    c(0xC4DD, None, "HANGUL SYLLABLE SSYULG", 0x31, "Hangul"),
    c(0xC4DE, None, "HANGUL SYLLABLE SSYULM", 0x31, "Hangul"),
    c(0xC4DF, None, "HANGUL SYLLABLE SSYULB", 0x31, "Hangul"),
    c(0xC4E0, None, "HANGUL SYLLABLE SSYULS", 0x31, "Hangul"),
    c(0xC4E1, None, "HANGUL SYLLABLE SSYULT", 0x31, "Hangul"),
    c(0xC4E2, None, "HANGUL SYLLABLE SSYULP", 0x31, "Hangul"),
    c(0xC4E3, None, "HANGUL SYLLABLE SSYULH", 0x31, "Hangul"),
    c(0xC4E4, None, "HANGUL SYLLABLE SSYUM", 0x31, "Hangul"),
    c(0xC4E5, None, "HANGUL SYLLABLE SSYUB", 0x31, "Hangul"),
    c(0xC4E6, None, "HANGUL SYLLABLE SSYUBS", 0x31, "Hangul"),
    c(0xC4E7, None, "HANGUL SYLLABLE SSYUS", 0x31, "Hangul"),
    c(0xC4E8, None, "HANGUL SYLLABLE SSYUSS", 0x31, "Hangul"),
    c(0xC4E9, None, "HANGUL SYLLABLE SSYUNG", 0x31, "Hangul"),
    c(0xC4EA, None, "HANGUL SYLLABLE SSYUJ", 0x31, "Hangul"),
    c(0xC4EB, None, "HANGUL SYLLABLE SSYUC", 0x31, "Hangul"),
    c(0xC4EC, None, "HANGUL SYLLABLE SSYUK", 0x31, "Hangul"),
    c(0xC4ED, None, "HANGUL SYLLABLE SSYUT", 0x31, "Hangul"),
    c(0xC4EE, None, "HANGUL SYLLABLE SSYUP", 0x31, "Hangul"),
    c(0xC4EF, None, "HANGUL SYLLABLE SSYUH", 0x31, "Hangul"),
    c(0xC4F0, None, "HANGUL SYLLABLE SSEU", 0x31, "Hangul"),
    c(0xC4F1, None, "HANGUL SYLLABLE SSEUG", 0x31, "Hangul"),
    c(0xC4F2, None, "HANGUL SYLLABLE SSEUGG", 0x31, "Hangul"),
    c(0xC4F3, None, "HANGUL SYLLABLE SSEUGS", 0x31, "Hangul"),
    c(0xC4F4, None, "HANGUL SYLLABLE SSEUN", 0x31, "Hangul"),
    c(0xC4F5, None, "HANGUL SYLLABLE SSEUNJ", 0x31, "Hangul"),
    c(0xC4F6, None, "HANGUL SYLLABLE SSEUNH", 0x31, "Hangul"),
    c(0xC4F7, None, "HANGUL SYLLABLE SSEUD", 0x31, "Hangul"),
    c(0xC4F8, None, "HANGUL SYLLABLE SSEUL", 0x31, "Hangul"),
    c(0xC4F9, None, "HANGUL SYLLABLE SSEULG", 0x31, "Hangul"),
    c(0xC4FA, None, "HANGUL SYLLABLE SSEULM", 0x31, "Hangul"),
    c(0xC4FB, None, "HANGUL SYLLABLE SSEULB", 0x31, "Hangul"),
    c(0xC4FC, None, "HANGUL SYLLABLE SSEULS", 0x31, "Hangul"),
    c(0xC4FD, None, "HANGUL SYLLABLE SSEULT", 0x31, "Hangul"),
    c(0xC4FE, None, "HANGUL SYLLABLE SSEULP", 0x31, "Hangul"),
    c(0xC4FF, None, "HANGUL SYLLABLE SSEULH", 0x31, "Hangul"),
    c(0xC500, None, "HANGUL SYLLABLE SSEUM", 0x31, "Hangul"),
    c(0xC501, None, "HANGUL SYLLABLE SSEUB", 0x31, "Hangul"),
    c(0xC502, None, "HANGUL SYLLABLE SSEUBS", 0x31, "Hangul"),
    c(0xC503, None, "HANGUL SYLLABLE SSEUS", 0x31, "Hangul"),
    c(0xC504, None, "HANGUL SYLLABLE SSEUSS", 0x31, "Hangul"),
    c(0xC505, None, "HANGUL SYLLABLE SSEUNG", 0x31, "Hangul"),
    c(0xC506, None, "HANGUL SYLLABLE SSEUJ", 0x31, "Hangul"),
    c(0xC507, None, "HANGUL SYLLABLE SSEUC", 0x31, "Hangul"),
    c(0xC508, None, "HANGUL SYLLABLE SSEUK", 0x31, "Hangul"),
    c(0xC509, None, "HANGUL SYLLABLE SSEUT", 0x31, "Hangul"),
    c(0xC50A, None, "HANGUL SYLLABLE SSEUP", 0x31, "Hangul"),
    c(0xC50B, None, "HANGUL SYLLABLE SSEUH", 0x31, "Hangul"),
    c(0xC50C, None, "HANGUL SYLLABLE SSYI", 0x31, "Hangul"),
    c(0xC50D, None, "HANGUL SYLLABLE SSYIG", 0x31, "Hangul"),
    c(0xC50E, None, "HANGUL SYLLABLE SSYIGG", 0x31, "Hangul"),
    c(0xC50F, None, "HANGUL SYLLABLE SSYIGS", 0x31, "Hangul"),
    c(0xC510, None, "HANGUL SYLLABLE SSYIN", 0x31, "Hangul"),
    c(0xC511, None, "HANGUL SYLLABLE SSYINJ", 0x31, "Hangul"),
    c(0xC512, None, "HANGUL SYLLABLE SSYINH", 0x31, "Hangul"),
    c(0xC513, None, "HANGUL SYLLABLE SSYID", 0x31, "Hangul"),
    c(0xC514, None, "HANGUL SYLLABLE SSYIL", 0x31, "Hangul"),
    c(0xC515, None, "HANGUL SYLLABLE SSYILG", 0x31, "Hangul"),
    c(0xC516, None, "HANGUL SYLLABLE SSYILM", 0x31, "Hangul"),
    c(0xC517, None, "HANGUL SYLLABLE SSYILB", 0x31, "Hangul"),
    c(0xC518, None, "HANGUL SYLLABLE SSYILS", 0x31, "Hangul"),
    c(0xC519, None, "HANGUL SYLLABLE SSYILT", 0x31, "Hangul"),
    c(0xC51A, None, "HANGUL SYLLABLE SSYILP", 0x31, "Hangul"),
    c(0xC51B, None, "HANGUL SYLLABLE SSYILH", 0x31, "Hangul"),
    c(0xC51C, None, "HANGUL SYLLABLE SSYIM", 0x31, "Hangul"),
    c(0xC51D, None, "HANGUL SYLLABLE SSYIB", 0x31, "Hangul"),
    c(0xC51E, None, "HANGUL SYLLABLE SSYIBS", 0x31, "Hangul"),
    c(0xC51F, None, "HANGUL SYLLABLE SSYIS", 0x31, "Hangul"),
    c(0xC520, None, "HANGUL SYLLABLE SSYISS", 0x31, "Hangul"),
    c(0xC521, None, "HANGUL SYLLABLE SSYING", 0x31, "Hangul"),
    c(0xC522, None, "HANGUL SYLLABLE SSYIJ", 0x31, "Hangul"),
    c(0xC523, None, "HANGUL SYLLABLE SSYIC", 0x31, "Hangul"),
    c(0xC524, None, "HANGUL SYLLABLE SSYIK", 0x31, "Hangul"),
    c(0xC525, None, "HANGUL SYLLABLE SSYIT", 0x31, "Hangul"),
    c(0xC526, None, "HANGUL SYLLABLE SSYIP", 0x31, "Hangul"),
    c(0xC527, None, "HANGUL SYLLABLE SSYIH", 0x31, "Hangul"),
    c(0xC528, None, "HANGUL SYLLABLE SSI", 0x31, "Hangul"),
    c(0xC529, None, "HANGUL SYLLABLE SSIG", 0x31, "Hangul"),
    c(0xC52A, None, "HANGUL SYLLABLE SSIGG", 0x31, "Hangul"),
    c(0xC52B, None, "HANGUL SYLLABLE SSIGS", 0x31, "Hangul"),
    c(0xC52C, None, "HANGUL SYLLABLE SSIN", 0x31, "Hangul"),
    c(0xC52D, None, "HANGUL SYLLABLE SSINJ", 0x31, "Hangul"),
    c(0xC52E, None, "HANGUL SYLLABLE SSINH", 0x31, "Hangul"),
    c(0xC52F, None, "HANGUL SYLLABLE SSID", 0x31, "Hangul"),
    c(0xC530, None, "HANGUL SYLLABLE SSIL", 0x31, "Hangul"),
    c(0xC531, None, "HANGUL SYLLABLE SSILG", 0x31, "Hangul"),
    c(0xC532, None, "HANGUL SYLLABLE SSILM", 0x31, "Hangul"),
    c(0xC533, None, "HANGUL SYLLABLE SSILB", 0x31, "Hangul"),
    c(0xC534, None, "HANGUL SYLLABLE SSILS", 0x31, "Hangul"),
    c(0xC535, None, "HANGUL SYLLABLE SSILT", 0x31, "Hangul"),
    c(0xC536, None, "HANGUL SYLLABLE SSILP", 0x31, "Hangul"),
    c(0xC537, None, "HANGUL SYLLABLE SSILH", 0x31, "Hangul"),
    c(0xC538, None, "HANGUL SYLLABLE SSIM", 0x31, "Hangul"),
    c(0xC539, None, "HANGUL SYLLABLE SSIB", 0x31, "Hangul"),
    c(0xC53A, None, "HANGUL SYLLABLE SSIBS", 0x31, "Hangul"),
    c(0xC53B, None, "HANGUL SYLLABLE SSIS", 0x31, "Hangul"),
    c(0xC53C, None, "HANGUL SYLLABLE SSISS", 0x31, "Hangul"),
    c(0xC53D, None, "HANGUL SYLLABLE SSING", 0x31, "Hangul"),
    c(0xC53E, None, "HANGUL SYLLABLE SSIJ", 0x31, "Hangul"),
    c(0xC53F, None, "HANGUL SYLLABLE SSIC", 0x31, "Hangul"),
    c(0xC540, None, "HANGUL SYLLABLE SSIK", 0x31, "Hangul"),
    c(0xC541, None, "HANGUL SYLLABLE SSIT", 0x31, "Hangul"),
    c(0xC542, None, "HANGUL SYLLABLE SSIP", 0x31, "Hangul"),
    c(0xC543, None, "HANGUL SYLLABLE SSIH", 0x31, "Hangul"),
    c(0xC544, None, "HANGUL SYLLABLE A", 0x31, "Hangul"),
    c(0xC545, None, "HANGUL SYLLABLE AG", 0x31, "Hangul"),
    c(0xC546, None, "HANGUL SYLLABLE AGG", 0x31, "Hangul"),
    c(0xC547, None, "HANGUL SYLLABLE AGS", 0x31, "Hangul"),
    c(0xC548, None, "HANGUL SYLLABLE AN", 0x31, "Hangul"),
    c(0xC549, None, "HANGUL SYLLABLE ANJ", 0x31, "Hangul"),
    c(0xC54A, None, "HANGUL SYLLABLE ANH", 0x31, "Hangul"),
    c(0xC54B, None, "HANGUL SYLLABLE AD", 0x31, "Hangul"),
    c(0xC54C, None, "HANGUL SYLLABLE AL", 0x31, "Hangul"),
    c(0xC54D, None, "HANGUL SYLLABLE ALG", 0x31, "Hangul"),
    c(0xC54E, None, "HANGUL SYLLABLE ALM", 0x31, "Hangul"),
    c(0xC54F, None, "HANGUL SYLLABLE ALB", 0x31, "Hangul"),
    c(0xC550, None, "HANGUL SYLLABLE ALS", 0x31, "Hangul"),
    c(0xC551, None, "HANGUL SYLLABLE ALT", 0x31, "Hangul"),
    c(0xC552, None, "HANGUL SYLLABLE ALP", 0x31, "Hangul"),
    c(0xC553, None, "HANGUL SYLLABLE ALH", 0x31, "Hangul"),
    c(0xC554, None, "HANGUL SYLLABLE AM", 0x31, "Hangul"),
    c(0xC555, None, "HANGUL SYLLABLE AB", 0x31, "Hangul"),
    c(0xC556, None, "HANGUL SYLLABLE ABS", 0x31, "Hangul"),
    c(0xC557, None, "HANGUL SYLLABLE AS", 0x31, "Hangul"),
    c(0xC558, None, "HANGUL SYLLABLE ASS", 0x31, "Hangul"),
    c(0xC559, None, "HANGUL SYLLABLE ANG", 0x31, "Hangul"),
    c(0xC55A, None, "HANGUL SYLLABLE AJ", 0x31, "Hangul"),
    c(0xC55B, None, "HANGUL SYLLABLE AC", 0x31, "Hangul"),
    c(0xC55C, None, "HANGUL SYLLABLE AK", 0x31, "Hangul"),
    c(0xC55D, None, "HANGUL SYLLABLE AT", 0x31, "Hangul"),
    c(0xC55E, None, "HANGUL SYLLABLE AP", 0x31, "Hangul"),
    c(0xC55F, None, "HANGUL SYLLABLE AH", 0x31, "Hangul"),
    c(0xC560, None, "HANGUL SYLLABLE AE", 0x31, "Hangul"),
    c(0xC561, None, "HANGUL SYLLABLE AEG", 0x31, "Hangul"),
    c(0xC562, None, "HANGUL SYLLABLE AEGG", 0x31, "Hangul"),
    c(0xC563, None, "HANGUL SYLLABLE AEGS", 0x31, "Hangul"),
    c(0xC564, None, "HANGUL SYLLABLE AEN", 0x31, "Hangul"),
    c(0xC565, None, "HANGUL SYLLABLE AENJ", 0x31, "Hangul"),
    c(0xC566, None, "HANGUL SYLLABLE AENH", 0x31, "Hangul"),
    c(0xC567, None, "HANGUL SYLLABLE AED", 0x31, "Hangul"),
    c(0xC568, None, "HANGUL SYLLABLE AEL", 0x31, "Hangul"),
    c(0xC569, None, "HANGUL SYLLABLE AELG", 0x31, "Hangul"),
    c(0xC56A, None, "HANGUL SYLLABLE AELM", 0x31, "Hangul"),
    c(0xC56B, None, "HANGUL SYLLABLE AELB", 0x31, "Hangul"),
    c(0xC56C, None, "HANGUL SYLLABLE AELS", 0x31, "Hangul"),
    c(0xC56D, None, "HANGUL SYLLABLE AELT", 0x31, "Hangul"),
    c(0xC56E, None, "HANGUL SYLLABLE AELP", 0x31, "Hangul"),
    c(0xC56F, None, "HANGUL SYLLABLE AELH", 0x31, "Hangul"),
    c(0xC570, None, "HANGUL SYLLABLE AEM", 0x31, "Hangul"),
    c(0xC571, None, "HANGUL SYLLABLE AEB", 0x31, "Hangul"),
    c(0xC572, None, "HANGUL SYLLABLE AEBS", 0x31, "Hangul"),
    c(0xC573, None, "HANGUL SYLLABLE AES", 0x31, "Hangul"),
    c(0xC574, None, "HANGUL SYLLABLE AESS", 0x31, "Hangul"),
    c(0xC575, None, "HANGUL SYLLABLE AENG", 0x31, "Hangul"),
    c(0xC576, None, "HANGUL SYLLABLE AEJ", 0x31, "Hangul"),
    c(0xC577, None, "HANGUL SYLLABLE AEC", 0x31, "Hangul"),
    c(0xC578, None, "HANGUL SYLLABLE AEK", 0x31, "Hangul"),
    c(0xC579, None, "HANGUL SYLLABLE AET", 0x31, "Hangul"),
    c(0xC57A, None, "HANGUL SYLLABLE AEP", 0x31, "Hangul"),
    c(0xC57B, None, "HANGUL SYLLABLE AEH", 0x31, "Hangul"),
    c(0xC57C, None, "HANGUL SYLLABLE YA", 0x31, "Hangul"),
    c(0xC57D, None, "HANGUL SYLLABLE YAG", 0x31, "Hangul"),
    c(0xC57E, None, "HANGUL SYLLABLE YAGG", 0x31, "Hangul"),
    c(0xC57F, None, "HANGUL SYLLABLE YAGS", 0x31, "Hangul"),
    c(0xC580, None, "HANGUL SYLLABLE YAN", 0x31, "Hangul"),
    c(0xC581, None, "HANGUL SYLLABLE YANJ", 0x31, "Hangul"),
    c(0xC582, None, "HANGUL SYLLABLE YANH", 0x31, "Hangul"),
    c(0xC583, None, "HANGUL SYLLABLE YAD", 0x31, "Hangul"),
    c(0xC584, None, "HANGUL SYLLABLE YAL", 0x31, "Hangul"),
    c(0xC585, None, "HANGUL SYLLABLE YALG", 0x31, "Hangul"),
    c(0xC586, None, "HANGUL SYLLABLE YALM", 0x31, "Hangul"),
    c(0xC587, None, "HANGUL SYLLABLE YALB", 0x31, "Hangul"),
    c(0xC588, None, "HANGUL SYLLABLE YALS", 0x31, "Hangul"),
    c(0xC589, None, "HANGUL SYLLABLE YALT", 0x31, "Hangul"),
    c(0xC58A, None, "HANGUL SYLLABLE YALP", 0x31, "Hangul"),
    c(0xC58B, None, "HANGUL SYLLABLE YALH", 0x31, "Hangul"),
    c(0xC58C, None, "HANGUL SYLLABLE YAM", 0x31, "Hangul"),
    c(0xC58D, None, "HANGUL SYLLABLE YAB", 0x31, "Hangul"),
    c(0xC58E, None, "HANGUL SYLLABLE YABS", 0x31, "Hangul"),
    c(0xC58F, None, "HANGUL SYLLABLE YAS", 0x31, "Hangul"),
    c(0xC590, None, "HANGUL SYLLABLE YASS", 0x31, "Hangul"),
    c(0xC591, None, "HANGUL SYLLABLE YANG", 0x31, "Hangul"),
    c(0xC592, None, "HANGUL SYLLABLE YAJ", 0x31, "Hangul"),
    c(0xC593, None, "HANGUL SYLLABLE YAC", 0x31, "Hangul"),
    c(0xC594, None, "HANGUL SYLLABLE YAK", 0x31, "Hangul"),
    c(0xC595, None, "HANGUL SYLLABLE YAT", 0x31, "Hangul"),
    c(0xC596, None, "HANGUL SYLLABLE YAP", 0x31, "Hangul"),
    c(0xC597, None, "HANGUL SYLLABLE YAH", 0x31, "Hangul"),
    c(0xC598, None, "HANGUL SYLLABLE YAE", 0x31, "Hangul"),
    c(0xC599, None, "HANGUL SYLLABLE YAEG", 0x31, "Hangul"),
    c(0xC59A, None, "HANGUL SYLLABLE YAEGG", 0x31, "Hangul"),
    c(0xC59B, None, "HANGUL SYLLABLE YAEGS", 0x31, "Hangul"),
    c(0xC59C, None, "HANGUL SYLLABLE YAEN", 0x31, "Hangul"),
    c(0xC59D, None, "HANGUL SYLLABLE YAENJ", 0x31, "Hangul"),
    c(0xC59E, None, "HANGUL SYLLABLE YAENH", 0x31, "Hangul"),
    c(0xC59F, None, "HANGUL SYLLABLE YAED", 0x31, "Hangul"),
    c(0xC5A0, None, "HANGUL SYLLABLE YAEL", 0x31, "Hangul"),
    c(0xC5A1, None, "HANGUL SYLLABLE YAELG", 0x31, "Hangul"),
    c(0xC5A2, None, "HANGUL SYLLABLE YAELM", 0x31, "Hangul"),
    c(0xC5A3, None, "HANGUL SYLLABLE YAELB", 0x31, "Hangul"),
    c(0xC5A4, None, "HANGUL SYLLABLE YAELS", 0x31, "Hangul"),
    c(0xC5A5, None, "HANGUL SYLLABLE YAELT", 0x31, "Hangul"),
    c(0xC5A6, None, "HANGUL SYLLABLE YAELP", 0x31, "Hangul"),
    c(0xC5A7, None, "HANGUL SYLLABLE YAELH", 0x31, "Hangul"),
    c(0xC5A8, None, "HANGUL SYLLABLE YAEM", 0x31, "Hangul"),
    c(0xC5A9, None, "HANGUL SYLLABLE YAEB", 0x31, "Hangul"),
    c(0xC5AA, None, "HANGUL SYLLABLE YAEBS", 0x31, "Hangul"),
    c(0xC5AB, None, "HANGUL SYLLABLE YAES", 0x31, "Hangul"),
    c(0xC5AC, None, "HANGUL SYLLABLE YAESS", 0x31, "Hangul"),
    c(0xC5AD, None, "HANGUL SYLLABLE YAENG", 0x31, "Hangul"),
    c(0xC5AE, None, "HANGUL SYLLABLE YAEJ", 0x31, "Hangul"),
    c(0xC5AF, None, "HANGUL SYLLABLE YAEC", 0x31, "Hangul"),
    c(0xC5B0, None, "HANGUL SYLLABLE YAEK", 0x31, "Hangul"),
    c(0xC5B1, None, "HANGUL SYLLABLE YAET", 0x31, "Hangul"),
    c(0xC5B2, None, "HANGUL SYLLABLE YAEP", 0x31, "Hangul"),
    c(0xC5B3, None, "HANGUL SYLLABLE YAEH", 0x31, "Hangul"),
    c(0xC5B4, None, "HANGUL SYLLABLE EO", 0x31, "Hangul"),
    c(0xC5B5, None, "HANGUL SYLLABLE EOG", 0x31, "Hangul"),
    c(0xC5B6, None, "HANGUL SYLLABLE EOGG", 0x31, "Hangul"),
    c(0xC5B7, None, "HANGUL SYLLABLE EOGS", 0x31, "Hangul"),
    c(0xC5B8, None, "HANGUL SYLLABLE EON", 0x31, "Hangul"),
    c(0xC5B9, None, "HANGUL SYLLABLE EONJ", 0x31, "Hangul"),
    c(0xC5BA, None, "HANGUL SYLLABLE EONH", 0x31, "Hangul"),
    c(0xC5BB, None, "HANGUL SYLLABLE EOD", 0x31, "Hangul"),
    c(0xC5BC, None, "HANGUL SYLLABLE EOL", 0x31, "Hangul"),
    c(0xC5BD, None, "HANGUL SYLLABLE EOLG", 0x31, "Hangul"),
    c(0xC5BE, None, "HANGUL SYLLABLE EOLM", 0x31, "Hangul"),
    c(0xC5BF, None, "HANGUL SYLLABLE EOLB", 0x31, "Hangul"),
    c(0xC5C0, None, "HANGUL SYLLABLE EOLS", 0x31, "Hangul"),
    c(0xC5C1, None, "HANGUL SYLLABLE EOLT", 0x31, "Hangul"),
    c(0xC5C2, None, "HANGUL SYLLABLE EOLP", 0x31, "Hangul"),
    c(0xC5C3, None, "HANGUL SYLLABLE EOLH", 0x31, "Hangul"),
    c(0xC5C4, None, "HANGUL SYLLABLE EOM", 0x31, "Hangul"),
    c(0xC5C5, None, "HANGUL SYLLABLE EOB", 0x31, "Hangul"),
    c(0xC5C6, None, "HANGUL SYLLABLE EOBS", 0x31, "Hangul"),
    c(0xC5C7, None, "HANGUL SYLLABLE EOS", 0x31, "Hangul"),
    c(0xC5C8, None, "HANGUL SYLLABLE EOSS", 0x31, "Hangul"),
    c(0xC5C9, None, "HANGUL SYLLABLE EONG", 0x31, "Hangul"),
    c(0xC5CA, None, "HANGUL SYLLABLE EOJ", 0x31, "Hangul"),
    c(0xC5CB, None, "HANGUL SYLLABLE EOC", 0x31, "Hangul"),
    c(0xC5CC, None, "HANGUL SYLLABLE EOK", 0x31, "Hangul"),
    c(0xC5CD, None, "HANGUL SYLLABLE EOT", 0x31, "Hangul"),
    c(0xC5CE, None, "HANGUL SYLLABLE EOP", 0x31, "Hangul"),
    c(0xC5CF, None, "HANGUL SYLLABLE EOH", 0x31, "Hangul"),
    c(0xC5D0, None, "HANGUL SYLLABLE E", 0x31, "Hangul"),
    c(0xC5D1, None, "HANGUL SYLLABLE EG", 0x31, "Hangul"),
    c(0xC5D2, None, "HANGUL SYLLABLE EGG", 0x31, "Hangul"),
    c(0xC5D3, None, "HANGUL SYLLABLE EGS", 0x31, "Hangul"),
    c(0xC5D4, None, "HANGUL SYLLABLE EN", 0x31, "Hangul"),
    c(0xC5D5, None, "HANGUL SYLLABLE ENJ", 0x31, "Hangul"),
    c(0xC5D6, None, "HANGUL SYLLABLE ENH", 0x31, "Hangul"),
    c(0xC5D7, None, "HANGUL SYLLABLE ED", 0x31, "Hangul"),
    c(0xC5D8, None, "HANGUL SYLLABLE EL", 0x31, "Hangul"),
    c(0xC5D9, None, "HANGUL SYLLABLE ELG", 0x31, "Hangul"),
    c(0xC5DA, None, "HANGUL SYLLABLE ELM", 0x31, "Hangul"),
    c(0xC5DB, None, "HANGUL SYLLABLE ELB", 0x31, "Hangul"),
    c(0xC5DC, None, "HANGUL SYLLABLE ELS", 0x31, "Hangul"),
    c(0xC5DD, None, "HANGUL SYLLABLE ELT", 0x31, "Hangul"),
    c(0xC5DE, None, "HANGUL SYLLABLE ELP", 0x31, "Hangul"),
    c(0xC5DF, None, "HANGUL SYLLABLE ELH", 0x31, "Hangul"),
    c(0xC5E0, None, "HANGUL SYLLABLE EM", 0x31, "Hangul"),
    c(0xC5E1, None, "HANGUL SYLLABLE EB", 0x31, "Hangul"),
    c(0xC5E2, None, "HANGUL SYLLABLE EBS", 0x31, "Hangul"),
    c(0xC5E3, None, "HANGUL SYLLABLE ES", 0x31, "Hangul"),
    c(0xC5E4, None, "HANGUL SYLLABLE ESS", 0x31, "Hangul"),
    c(0xC5E5, None, "HANGUL SYLLABLE ENG", 0x31, "Hangul"),
    c(0xC5E6, None, "HANGUL SYLLABLE EJ", 0x31, "Hangul"),
    c(0xC5E7, None, "HANGUL SYLLABLE EC", 0x31, "Hangul"),
    c(0xC5E8, None, "HANGUL SYLLABLE EK", 0x31, "Hangul"),
    c(0xC5E9, None, "HANGUL SYLLABLE ET", 0x31, "Hangul"),
    c(0xC5EA, None, "HANGUL SYLLABLE EP", 0x31, "Hangul"),
    c(0xC5EB, None, "HANGUL SYLLABLE EH", 0x31, "Hangul"),
    c(0xC5EC, None, "HANGUL SYLLABLE YEO", 0x31, "Hangul"),
    c(0xC5ED, None, "HANGUL SYLLABLE YEOG", 0x31, "Hangul"),
    c(0xC5EE, None, "HANGUL SYLLABLE YEOGG", 0x31, "Hangul"),
    c(0xC5EF, None, "HANGUL SYLLABLE YEOGS", 0x31, "Hangul"),
    c(0xC5F0, None, "HANGUL SYLLABLE YEON", 0x31, "Hangul"),
    c(0xC5F1, None, "HANGUL SYLLABLE YEONJ", 0x31, "Hangul"),
    c(0xC5F2, None, "HANGUL SYLLABLE YEONH", 0x31, "Hangul"),
    c(0xC5F3, None, "HANGUL SYLLABLE YEOD", 0x31, "Hangul"),
    c(0xC5F4, None, "HANGUL SYLLABLE YEOL", 0x31, "Hangul"),
    c(0xC5F5, None, "HANGUL SYLLABLE YEOLG", 0x31, "Hangul"),
    c(0xC5F6, None, "HANGUL SYLLABLE YEOLM", 0x31, "Hangul"),
    c(0xC5F7, None, "HANGUL SYLLABLE YEOLB", 0x31, "Hangul"),
    c(0xC5F8, None, "HANGUL SYLLABLE YEOLS", 0x31, "Hangul"),
    c(0xC5F9, None, "HANGUL SYLLABLE YEOLT", 0x31, "Hangul"),
    c(0xC5FA, None, "HANGUL SYLLABLE YEOLP", 0x31, "Hangul"),
    c(0xC5FB, None, "HANGUL SYLLABLE YEOLH", 0x31, "Hangul"),
    c(0xC5FC, None, "HANGUL SYLLABLE YEOM", 0x31, "Hangul"),
    c(0xC5FD, None, "HANGUL SYLLABLE YEOB", 0x31, "Hangul"),
    c(0xC5FE, None, "HANGUL SYLLABLE YEOBS", 0x31, "Hangul"),
    c(0xC5FF, None, "HANGUL SYLLABLE YEOS", 0x31, "Hangul"),
    c(0xC600, None, "HANGUL SYLLABLE YEOSS", 0x31, "Hangul"),
    c(0xC601, None, "HANGUL SYLLABLE YEONG", 0x31, "Hangul"),
    c(0xC602, None, "HANGUL SYLLABLE YEOJ", 0x31, "Hangul"),
    c(0xC603, None, "HANGUL SYLLABLE YEOC", 0x31, "Hangul"),
    c(0xC604, None, "HANGUL SYLLABLE YEOK", 0x31, "Hangul"),
    c(0xC605, None, "HANGUL SYLLABLE YEOT", 0x31, "Hangul"),
    c(0xC606, None, "HANGUL SYLLABLE YEOP", 0x31, "Hangul"),
    c(0xC607, None, "HANGUL SYLLABLE YEOH", 0x31, "Hangul"),
    c(0xC608, None, "HANGUL SYLLABLE YE", 0x31, "Hangul"),
    c(0xC609, None, "HANGUL SYLLABLE YEG", 0x31, "Hangul"),
    c(0xC60A, None, "HANGUL SYLLABLE YEGG", 0x31, "Hangul"),
    c(0xC60B, None, "HANGUL SYLLABLE YEGS", 0x31, "Hangul"),
    c(0xC60C, None, "HANGUL SYLLABLE YEN", 0x31, "Hangul"),
    c(0xC60D, None, "HANGUL SYLLABLE YENJ", 0x31, "Hangul"),
    c(0xC60E, None, "HANGUL SYLLABLE YENH", 0x31, "Hangul"),
    c(0xC60F, None, "HANGUL SYLLABLE YED", 0x31, "Hangul"),
    c(0xC610, None, "HANGUL SYLLABLE YEL", 0x31, "Hangul"),
    c(0xC611, None, "HANGUL SYLLABLE YELG", 0x31, "Hangul"),
    c(0xC612, None, "HANGUL SYLLABLE YELM", 0x31, "Hangul"),
    c(0xC613, None, "HANGUL SYLLABLE YELB", 0x31, "Hangul"),
    c(0xC614, None, "HANGUL SYLLABLE YELS", 0x31, "Hangul"),
    c(0xC615, None, "HANGUL SYLLABLE YELT", 0x31, "Hangul"),
    c(0xC616, None, "HANGUL SYLLABLE YELP", 0x31, "Hangul"),
    c(0xC617, None, "HANGUL SYLLABLE YELH", 0x31, "Hangul"),
    c(0xC618, None, "HANGUL SYLLABLE YEM", 0x31, "Hangul"),
    c(0xC619, None, "HANGUL SYLLABLE YEB", 0x31, "Hangul"),
    c(0xC61A, None, "HANGUL SYLLABLE YEBS", 0x31, "Hangul"),
    c(0xC61B, None, "HANGUL SYLLABLE YES", 0x31, "Hangul"),
    c(0xC61C, None, "HANGUL SYLLABLE YESS", 0x31, "Hangul"),
    c(0xC61D, None, "HANGUL SYLLABLE YENG", 0x31, "Hangul"),
    c(0xC61E, None, "HANGUL SYLLABLE YEJ", 0x31, "Hangul"),
    c(0xC61F, None, "HANGUL SYLLABLE YEC", 0x31, "Hangul"),
    c(0xC620, None, "HANGUL SYLLABLE YEK", 0x31, "Hangul"),
    c(0xC621, None, "HANGUL SYLLABLE YET", 0x31, "Hangul"),
    c(0xC622, None, "HANGUL SYLLABLE YEP", 0x31, "Hangul"),
    c(0xC623, None, "HANGUL SYLLABLE YEH", 0x31, "Hangul"),
    c(0xC624, None, "HANGUL SYLLABLE O", 0x31, "Hangul"),
    c(0xC625, None, "HANGUL SYLLABLE OG", 0x31, "Hangul"),
    c(0xC626, None, "HANGUL SYLLABLE OGG", 0x31, "Hangul"),
    c(0xC627, None, "HANGUL SYLLABLE OGS", 0x31, "Hangul"),
    c(0xC628, None, "HANGUL SYLLABLE ON", 0x31, "Hangul"),
    c(0xC629, None, "HANGUL SYLLABLE ONJ", 0x31, "Hangul"),
    c(0xC62A, None, "HANGUL SYLLABLE ONH", 0x31, "Hangul"),
    c(0xC62B, None, "HANGUL SYLLABLE OD", 0x31, "Hangul"),
    c(0xC62C, None, "HANGUL SYLLABLE OL", 0x31, "Hangul"),
    c(0xC62D, None, "HANGUL SYLLABLE OLG", 0x31, "Hangul"),
    c(0xC62E, None, "HANGUL SYLLABLE OLM", 0x31, "Hangul"),
    c(0xC62F, None, "HANGUL SYLLABLE OLB", 0x31, "Hangul"),
    c(0xC630, None, "HANGUL SYLLABLE OLS", 0x31, "Hangul"),
    c(0xC631, None, "HANGUL SYLLABLE OLT", 0x31, "Hangul"),
    c(0xC632, None, "HANGUL SYLLABLE OLP", 0x31, "Hangul"),
    c(0xC633, None, "HANGUL SYLLABLE OLH", 0x31, "Hangul"),
    c(0xC634, None, "HANGUL SYLLABLE OM", 0x31, "Hangul"),
    c(0xC635, None, "HANGUL SYLLABLE OB", 0x31, "Hangul"),
    c(0xC636, None, "HANGUL SYLLABLE OBS", 0x31, "Hangul"),
    c(0xC637, None, "HANGUL SYLLABLE OS", 0x31, "Hangul"),
    c(0xC638, None, "HANGUL SYLLABLE OSS", 0x31, "Hangul"),
    c(0xC639, None, "HANGUL SYLLABLE ONG", 0x31, "Hangul"),
    c(0xC63A, None, "HANGUL SYLLABLE OJ", 0x31, "Hangul"),
    c(0xC63B, None, "HANGUL SYLLABLE OC", 0x31, "Hangul"),
    c(0xC63C, None, "HANGUL SYLLABLE OK", 0x31, "Hangul"),
    c(0xC63D, None, "HANGUL SYLLABLE OT", 0x31, "Hangul"),
    c(0xC63E, None, "HANGUL SYLLABLE OP", 0x31, "Hangul"),
    c(0xC63F, None, "HANGUL SYLLABLE OH", 0x31, "Hangul"),
    c(0xC640, None, "HANGUL SYLLABLE WA", 0x31, "Hangul"),
    c(0xC641, None, "HANGUL SYLLABLE WAG", 0x31, "Hangul"),
    c(0xC642, None, "HANGUL SYLLABLE WAGG", 0x31, "Hangul"),
    c(0xC643, None, "HANGUL SYLLABLE WAGS", 0x31, "Hangul"),
    c(0xC644, None, "HANGUL SYLLABLE WAN", 0x31, "Hangul"),
    c(0xC645, None, "HANGUL SYLLABLE WANJ", 0x31, "Hangul"),
    c(0xC646, None, "HANGUL SYLLABLE WANH", 0x31, "Hangul"),
    c(0xC647, None, "HANGUL SYLLABLE WAD", 0x31, "Hangul"),
    c(0xC648, None, "HANGUL SYLLABLE WAL", 0x31, "Hangul"),
    c(0xC649, None, "HANGUL SYLLABLE WALG", 0x31, "Hangul"),
    c(0xC64A, None, "HANGUL SYLLABLE WALM", 0x31, "Hangul"),
    c(0xC64B, None, "HANGUL SYLLABLE WALB", 0x31, "Hangul"),
    c(0xC64C, None, "HANGUL SYLLABLE WALS", 0x31, "Hangul"),
    c(0xC64D, None, "HANGUL SYLLABLE WALT", 0x31, "Hangul"),
    c(0xC64E, None, "HANGUL SYLLABLE WALP", 0x31, "Hangul"),
    c(0xC64F, None, "HANGUL SYLLABLE WALH", 0x31, "Hangul"),
    c(0xC650, None, "HANGUL SYLLABLE WAM", 0x31, "Hangul"),
    c(0xC651, None, "HANGUL SYLLABLE WAB", 0x31, "Hangul"),
    c(0xC652, None, "HANGUL SYLLABLE WABS", 0x31, "Hangul"),
    c(0xC653, None, "HANGUL SYLLABLE WAS", 0x31, "Hangul"),
    c(0xC654, None, "HANGUL SYLLABLE WASS", 0x31, "Hangul"),
    c(0xC655, None, "HANGUL SYLLABLE WANG", 0x31, "Hangul"),
    c(0xC656, None, "HANGUL SYLLABLE WAJ", 0x31, "Hangul"),
    c(0xC657, None, "HANGUL SYLLABLE WAC", 0x31, "Hangul"),
    c(0xC658, None, "HANGUL SYLLABLE WAK", 0x31, "Hangul"),
    c(0xC659, None, "HANGUL SYLLABLE WAT", 0x31, "Hangul"),
    c(0xC65A, None, "HANGUL SYLLABLE WAP", 0x31, "Hangul"),
    c(0xC65B, None, "HANGUL SYLLABLE WAH", 0x31, "Hangul"),
    c(0xC65C, None, "HANGUL SYLLABLE WAE", 0x31, "Hangul"),
    c(0xC65D, None, "HANGUL SYLLABLE WAEG", 0x31, "Hangul"),
    c(0xC65E, None, "HANGUL SYLLABLE WAEGG", 0x31, "Hangul"),
    c(0xC65F, None, "HANGUL SYLLABLE WAEGS", 0x31, "Hangul"),
    c(0xC660, None, "HANGUL SYLLABLE WAEN", 0x31, "Hangul"),
    c(0xC661, None, "HANGUL SYLLABLE WAENJ", 0x31, "Hangul"),
    c(0xC662, None, "HANGUL SYLLABLE WAENH", 0x31, "Hangul"),
    c(0xC663, None, "HANGUL SYLLABLE WAED", 0x31, "Hangul"),
    c(0xC664, None, "HANGUL SYLLABLE WAEL", 0x31, "Hangul"),
    c(0xC665, None, "HANGUL SYLLABLE WAELG", 0x31, "Hangul"),
    c(0xC666, None, "HANGUL SYLLABLE WAELM", 0x31, "Hangul"),
    c(0xC667, None, "HANGUL SYLLABLE WAELB", 0x31, "Hangul"),
    c(0xC668, None, "HANGUL SYLLABLE WAELS", 0x31, "Hangul"),
    c(0xC669, None, "HANGUL SYLLABLE WAELT", 0x31, "Hangul"),
    c(0xC66A, None, "HANGUL SYLLABLE WAELP", 0x31, "Hangul"),
    c(0xC66B, None, "HANGUL SYLLABLE WAELH", 0x31, "Hangul"),
    c(0xC66C, None, "HANGUL SYLLABLE WAEM", 0x31, "Hangul"),
    c(0xC66D, None, "HANGUL SYLLABLE WAEB", 0x31, "Hangul"),
    c(0xC66E, None, "HANGUL SYLLABLE WAEBS", 0x31, "Hangul"),
    c(0xC66F, None, "HANGUL SYLLABLE WAES", 0x31, "Hangul"),
    c(0xC670, None, "HANGUL SYLLABLE WAESS", 0x31, "Hangul"),
    c(0xC671, None, "HANGUL SYLLABLE WAENG", 0x31, "Hangul"),
    c(0xC672, None, "HANGUL SYLLABLE WAEJ", 0x31, "Hangul"),
    c(0xC673, None, "HANGUL SYLLABLE WAEC", 0x31, "Hangul"),
    c(0xC674, None, "HANGUL SYLLABLE WAEK", 0x31, "Hangul"),
    c(0xC675, None, "HANGUL SYLLABLE WAET", 0x31, "Hangul"),
    c(0xC676, None, "HANGUL SYLLABLE WAEP", 0x31, "Hangul"),
    c(0xC677, None, "HANGUL SYLLABLE WAEH", 0x31, "Hangul"),
    c(0xC678, None, "HANGUL SYLLABLE OE", 0x31, "Hangul"),
    c(0xC679, None, "HANGUL SYLLABLE OEG", 0x31, "Hangul"),
    c(0xC67A, None, "HANGUL SYLLABLE OEGG", 0x31, "Hangul"),
    c(0xC67B, None, "HANGUL SYLLABLE OEGS", 0x31, "Hangul"),
    c(0xC67C, None, "HANGUL SYLLABLE OEN", 0x31, "Hangul"),
    c(0xC67D, None, "HANGUL SYLLABLE OENJ", 0x31, "Hangul"),
    c(0xC67E, None, "HANGUL SYLLABLE OENH", 0x31, "Hangul"),
    c(0xC67F, None, "HANGUL SYLLABLE OED", 0x31, "Hangul"),
    c(0xC680, None, "HANGUL SYLLABLE OEL", 0x31, "Hangul"),
    c(0xC681, None, "HANGUL SYLLABLE OELG", 0x31, "Hangul"),
    c(0xC682, None, "HANGUL SYLLABLE OELM", 0x31, "Hangul"),
    c(0xC683, None, "HANGUL SYLLABLE OELB", 0x31, "Hangul"),
    c(0xC684, None, "HANGUL SYLLABLE OELS", 0x31, "Hangul"),
    c(0xC685, None, "HANGUL SYLLABLE OELT", 0x31, "Hangul"),
    c(0xC686, None, "HANGUL SYLLABLE OELP", 0x31, "Hangul"),
    c(0xC687, None, "HANGUL SYLLABLE OELH", 0x31, "Hangul"),
    c(0xC688, None, "HANGUL SYLLABLE OEM", 0x31, "Hangul"),
    c(0xC689, None, "HANGUL SYLLABLE OEB", 0x31, "Hangul"),
    c(0xC68A, None, "HANGUL SYLLABLE OEBS", 0x31, "Hangul"),
    c(0xC68B, None, "HANGUL SYLLABLE OES", 0x31, "Hangul"),
    c(0xC68C, None, "HANGUL SYLLABLE OESS", 0x31, "Hangul"),
    c(0xC68D, None, "HANGUL SYLLABLE OENG", 0x31, "Hangul"),
    c(0xC68E, None, "HANGUL SYLLABLE OEJ", 0x31, "Hangul"),
    c(0xC68F, None, "HANGUL SYLLABLE OEC", 0x31, "Hangul"),
    c(0xC690, None, "HANGUL SYLLABLE OEK", 0x31, "Hangul"),
    c(0xC691, None, "HANGUL SYLLABLE OET", 0x31, "Hangul"),
    c(0xC692, None, "HANGUL SYLLABLE OEP", 0x31, "Hangul"),
    c(0xC693, None, "HANGUL SYLLABLE OEH", 0x31, "Hangul"),
    c(0xC694, None, "HANGUL SYLLABLE YO", 0x31, "Hangul"),
    c(0xC695, None, "HANGUL SYLLABLE YOG", 0x31, "Hangul"),
    c(0xC696, None, "HANGUL SYLLABLE YOGG", 0x31, "Hangul"),
    c(0xC697, None, "HANGUL SYLLABLE YOGS", 0x31, "Hangul"),
    c(0xC698, None, "HANGUL SYLLABLE YON", 0x31, "Hangul"),
    c(0xC699, None, "HANGUL SYLLABLE YONJ", 0x31, "Hangul"),
    c(0xC69A, None, "HANGUL SYLLABLE YONH", 0x31, "Hangul"),
    c(0xC69B, None, "HANGUL SYLLABLE YOD", 0x31, "Hangul"),
    c(0xC69C, None, "HANGUL SYLLABLE YOL", 0x31, "Hangul"),
    c(0xC69D, None, "HANGUL SYLLABLE YOLG", 0x31, "Hangul"),
    c(0xC69E, None, "HANGUL SYLLABLE YOLM", 0x31, "Hangul"),
    c(0xC69F, None, "HANGUL SYLLABLE YOLB", 0x31, "Hangul"),
    c(0xC6A0, None, "HANGUL SYLLABLE YOLS", 0x31, "Hangul"),
    c(0xC6A1, None, "HANGUL SYLLABLE YOLT", 0x31, "Hangul"),
    c(0xC6A2, None, "HANGUL SYLLABLE YOLP", 0x31, "Hangul"),
    c(0xC6A3, None, "HANGUL SYLLABLE YOLH", 0x31, "Hangul"),
    c(0xC6A4, None, "HANGUL SYLLABLE YOM", 0x31, "Hangul"),
    c(0xC6A5, None, "HANGUL SYLLABLE YOB", 0x31, "Hangul"),
    c(0xC6A6, None, "HANGUL SYLLABLE YOBS", 0x31, "Hangul"),
    c(0xC6A7, None, "HANGUL SYLLABLE YOS", 0x31, "Hangul"),
    c(0xC6A8, None, "HANGUL SYLLABLE YOSS", 0x31, "Hangul"),
    c(0xC6A9, None, "HANGUL SYLLABLE YONG", 0x31, "Hangul"),
    c(0xC6AA, None, "HANGUL SYLLABLE YOJ", 0x31, "Hangul"),
    c(0xC6AB, None, "HANGUL SYLLABLE YOC", 0x31, "Hangul"),
    c(0xC6AC, None, "HANGUL SYLLABLE YOK", 0x31, "Hangul"),
    c(0xC6AD, None, "HANGUL SYLLABLE YOT", 0x31, "Hangul"),
    c(0xC6AE, None, "HANGUL SYLLABLE YOP", 0x31, "Hangul"),
    c(0xC6AF, None, "HANGUL SYLLABLE YOH", 0x31, "Hangul"),
    c(0xC6B0, None, "HANGUL SYLLABLE U", 0x31, "Hangul"),
    c(0xC6B1, None, "HANGUL SYLLABLE UG", 0x31, "Hangul"),
    c(0xC6B2, None, "HANGUL SYLLABLE UGG", 0x31, "Hangul"),
    c(0xC6B3, None, "HANGUL SYLLABLE UGS", 0x31, "Hangul"),
    c(0xC6B4, None, "HANGUL SYLLABLE UN", 0x31, "Hangul"),
    c(0xC6B5, None, "HANGUL SYLLABLE UNJ", 0x31, "Hangul"),
    c(0xC6B6, None, "HANGUL SYLLABLE UNH", 0x31, "Hangul"),
    c(0xC6B7, None, "HANGUL SYLLABLE UD", 0x31, "Hangul"),
    c(0xC6B8, None, "HANGUL SYLLABLE UL", 0x31, "Hangul"),
    c(0xC6B9, None, "HANGUL SYLLABLE ULG", 0x31, "Hangul"),
    c(0xC6BA, None, "HANGUL SYLLABLE ULM", 0x31, "Hangul"),
    c(0xC6BB, None, "HANGUL SYLLABLE ULB", 0x31, "Hangul"),
    c(0xC6BC, None, "HANGUL SYLLABLE ULS", 0x31, "Hangul"),
    c(0xC6BD, None, "HANGUL SYLLABLE ULT", 0x31, "Hangul"),
    c(0xC6BE, None, "HANGUL SYLLABLE ULP", 0x31, "Hangul"),
    c(0xC6BF, None, "HANGUL SYLLABLE ULH", 0x31, "Hangul"),
    c(0xC6C0, None, "HANGUL SYLLABLE UM", 0x31, "Hangul"),
    c(0xC6C1, None, "HANGUL SYLLABLE UB", 0x31, "Hangul"),
    c(0xC6C2, None, "HANGUL SYLLABLE UBS", 0x31, "Hangul"),
    c(0xC6C3, None, "HANGUL SYLLABLE US", 0x31, "Hangul"),
    c(0xC6C4, None, "HANGUL SYLLABLE USS", 0x31, "Hangul"),
    c(0xC6C5, None, "HANGUL SYLLABLE UNG", 0x31, "Hangul"),
    c(0xC6C6, None, "HANGUL SYLLABLE UJ", 0x31, "Hangul"),
    c(0xC6C7, None, "HANGUL SYLLABLE UC", 0x31, "Hangul"),
    c(0xC6C8, None, "HANGUL SYLLABLE UK", 0x31, "Hangul"),
    c(0xC6C9, None, "HANGUL SYLLABLE UT", 0x31, "Hangul"),
    c(0xC6CA, None, "HANGUL SYLLABLE UP", 0x31, "Hangul"),
    c(0xC6CB, None, "HANGUL SYLLABLE UH", 0x31, "Hangul"),
    c(0xC6CC, None, "HANGUL SYLLABLE WEO", 0x31, "Hangul"),
    c(0xC6CD, None, "HANGUL SYLLABLE WEOG", 0x31, "Hangul"),
    c(0xC6CE, None, "HANGUL SYLLABLE WEOGG", 0x31, "Hangul"),
    c(0xC6CF, None, "HANGUL SYLLABLE WEOGS", 0x31, "Hangul"),
    c(0xC6D0, None, "HANGUL SYLLABLE WEON", 0x31, "Hangul"),
    c(0xC6D1, None, "HANGUL SYLLABLE WEONJ", 0x31, "Hangul"),
    c(0xC6D2, None, "HANGUL SYLLABLE WEONH", 0x31, "Hangul"),
    c(0xC6D3, None, "HANGUL SYLLABLE WEOD", 0x31, "Hangul"),
    c(0xC6D4, None, "HANGUL SYLLABLE WEOL", 0x31, "Hangul"),
    c(0xC6D5, None, "HANGUL SYLLABLE WEOLG", 0x31, "Hangul"),
    c(0xC6D6, None, "HANGUL SYLLABLE WEOLM", 0x31, "Hangul"),
    c(0xC6D7, None, "HANGUL SYLLABLE WEOLB", 0x31, "Hangul"),
    c(0xC6D8, None, "HANGUL SYLLABLE WEOLS", 0x31, "Hangul"),
    c(0xC6D9, None, "HANGUL SYLLABLE WEOLT", 0x31, "Hangul"),
    c(0xC6DA, None, "HANGUL SYLLABLE WEOLP", 0x31, "Hangul"),
    c(0xC6DB, None, "HANGUL SYLLABLE WEOLH", 0x31, "Hangul"),
    c(0xC6DC, None, "HANGUL SYLLABLE WEOM", 0x31, "Hangul"),
    c(0xC6DD, None, "HANGUL SYLLABLE WEOB", 0x31, "Hangul"),
    c(0xC6DE, None, "HANGUL SYLLABLE WEOBS", 0x31, "Hangul"),
    c(0xC6DF, None, "HANGUL SYLLABLE WEOS", 0x31, "Hangul"),
    c(0xC6E0, None, "HANGUL SYLLABLE WEOSS", 0x31, "Hangul"),
    c(0xC6E1, None, "HANGUL SYLLABLE WEONG", 0x31, "Hangul"),
    c(0xC6E2, None, "HANGUL SYLLABLE WEOJ", 0x31, "Hangul"),
    c(0xC6E3, None, "HANGUL SYLLABLE WEOC", 0x31, "Hangul"),
    c(0xC6E4, None, "HANGUL SYLLABLE WEOK", 0x31, "Hangul"),
    c(0xC6E5, None, "HANGUL SYLLABLE WEOT", 0x31, "Hangul"),
    c(0xC6E6, None, "HANGUL SYLLABLE WEOP", 0x31, "Hangul"),
    c(0xC6E7, None, "HANGUL SYLLABLE WEOH", 0x31, "Hangul"),
    c(0xC6E8, None, "HANGUL SYLLABLE WE", 0x31, "Hangul"),
    c(0xC6E9, None, "HANGUL SYLLABLE WEG", 0x31, "Hangul"),
    c(0xC6EA, None, "HANGUL SYLLABLE WEGG", 0x31, "Hangul"),
    c(0xC6EB, None, "HANGUL SYLLABLE WEGS", 0x31, "Hangul"),
    c(0xC6EC, None, "HANGUL SYLLABLE WEN", 0x31, "Hangul"),
    c(0xC6ED, None, "HANGUL SYLLABLE WENJ", 0x31, "Hangul"),
    c(0xC6EE, None, "HANGUL SYLLABLE WENH", 0x31, "Hangul"),
    c(0xC6EF, None, "HANGUL SYLLABLE WED", 0x31, "Hangul"),
    c(0xC6F0, None, "HANGUL SYLLABLE WEL", 0x31, "Hangul"),
    c(0xC6F1, None, "HANGUL SYLLABLE WELG", 0x31, "Hangul"),
    c(0xC6F2, None, "HANGUL SYLLABLE WELM", 0x31, "Hangul"),
    c(0xC6F3, None, "HANGUL SYLLABLE WELB", 0x31, "Hangul"),
    c(0xC6F4, None, "HANGUL SYLLABLE WELS", 0x31, "Hangul"),
    c(0xC6F5, None, "HANGUL SYLLABLE WELT", 0x31, "Hangul"),
    c(0xC6F6, None, "HANGUL SYLLABLE WELP", 0x31, "Hangul"),
    c(0xC6F7, None, "HANGUL SYLLABLE WELH", 0x31, "Hangul"),
    c(0xC6F8, None, "HANGUL SYLLABLE WEM", 0x31, "Hangul"),
    c(0xC6F9, None, "HANGUL SYLLABLE WEB", 0x31, "Hangul"),
    c(0xC6FA, None, "HANGUL SYLLABLE WEBS", 0x31, "Hangul"),
    c(0xC6FB, None, "HANGUL SYLLABLE WES", 0x31, "Hangul"),
    c(0xC6FC, None, "HANGUL SYLLABLE WESS", 0x31, "Hangul"),
    c(0xC6FD, None, "HANGUL SYLLABLE WENG", 0x31, "Hangul"),
    c(0xC6FE, None, "HANGUL SYLLABLE WEJ", 0x31, "Hangul"),
    c(0xC6FF, None, "HANGUL SYLLABLE WEC", 0x31, "Hangul"),
    c(0xC700, None, "HANGUL SYLLABLE WEK", 0x31, "Hangul"),
    c(0xC701, None, "HANGUL SYLLABLE WET", 0x31, "Hangul"),
    c(0xC702, None, "HANGUL SYLLABLE WEP", 0x31, "Hangul"),
    c(0xC703, None, "HANGUL SYLLABLE WEH", 0x31, "Hangul"),
    c(0xC704, None, "HANGUL SYLLABLE WI", 0x31, "Hangul"),
    c(0xC705, None, "HANGUL SYLLABLE WIG", 0x31, "Hangul"),
    c(0xC706, None, "HANGUL SYLLABLE WIGG", 0x31, "Hangul"),
    c(0xC707, None, "HANGUL SYLLABLE WIGS", 0x31, "Hangul"),
    c(0xC708, None, "HANGUL SYLLABLE WIN", 0x31, "Hangul"),
    c(0xC709, None, "HANGUL SYLLABLE WINJ", 0x31, "Hangul"),
    c(0xC70A, None, "HANGUL SYLLABLE WINH", 0x31, "Hangul"),
    c(0xC70B, None, "HANGUL SYLLABLE WID", 0x31, "Hangul"),
    c(0xC70C, None, "HANGUL SYLLABLE WIL", 0x31, "Hangul"),
    c(0xC70D, None, "HANGUL SYLLABLE WILG", 0x31, "Hangul"),
    c(0xC70E, None, "HANGUL SYLLABLE WILM", 0x31, "Hangul"),
    c(0xC70F, None, "HANGUL SYLLABLE WILB", 0x31, "Hangul"),
    c(0xC710, None, "HANGUL SYLLABLE WILS", 0x31, "Hangul"),
    c(0xC711, None, "HANGUL SYLLABLE WILT", 0x31, "Hangul"),
    c(0xC712, None, "HANGUL SYLLABLE WILP", 0x31, "Hangul"),
    c(0xC713, None, "HANGUL SYLLABLE WILH", 0x31, "Hangul"),
    c(0xC714, None, "HANGUL SYLLABLE WIM", 0x31, "Hangul"),
    c(0xC715, None, "HANGUL SYLLABLE WIB", 0x31, "Hangul"),
    c(0xC716, None, "HANGUL SYLLABLE WIBS", 0x31, "Hangul"),
    c(0xC717, None, "HANGUL SYLLABLE WIS", 0x31, "Hangul"),
    c(0xC718, None, "HANGUL SYLLABLE WISS", 0x31, "Hangul"),
    c(0xC719, None, "HANGUL SYLLABLE WING", 0x31, "Hangul"),
    c(0xC71A, None, "HANGUL SYLLABLE WIJ", 0x31, "Hangul"),
    c(0xC71B, None, "HANGUL SYLLABLE WIC", 0x31, "Hangul"),
    c(0xC71C, None, "HANGUL SYLLABLE WIK", 0x31, "Hangul"),
    c(0xC71D, None, "HANGUL SYLLABLE WIT", 0x31, "Hangul"),
    c(0xC71E, None, "HANGUL SYLLABLE WIP", 0x31, "Hangul"),
    c(0xC71F, None, "HANGUL SYLLABLE WIH", 0x31, "Hangul"),
    c(0xC720, None, "HANGUL SYLLABLE YU", 0x31, "Hangul"),
    c(0xC721, None, "HANGUL SYLLABLE YUG", 0x31, "Hangul"),
    c(0xC722, None, "HANGUL SYLLABLE YUGG", 0x31, "Hangul"),
    c(0xC723, None, "HANGUL SYLLABLE YUGS", 0x31, "Hangul"),
    c(0xC724, None, "HANGUL SYLLABLE YUN", 0x31, "Hangul"),
    c(0xC725, None, "HANGUL SYLLABLE YUNJ", 0x31, "Hangul"),
    c(0xC726, None, "HANGUL SYLLABLE YUNH", 0x31, "Hangul"),
    c(0xC727, None, "HANGUL SYLLABLE YUD", 0x31, "Hangul"),
    c(0xC728, None, "HANGUL SYLLABLE YUL", 0x31, "Hangul"),
    c(0xC729, None, "HANGUL SYLLABLE YULG", 0x31, "Hangul"),
    c(0xC72A, None, "HANGUL SYLLABLE YULM", 0x31, "Hangul"),
    c(0xC72B, None, "HANGUL SYLLABLE YULB", 0x31, "Hangul"),
    c(0xC72C, None, "HANGUL SYLLABLE YULS", 0x31, "Hangul"),
    c(0xC72D, None, "HANGUL SYLLABLE YULT", 0x31, "Hangul"),
    c(0xC72E, None, "HANGUL SYLLABLE YULP", 0x31, "Hangul"),
    c(0xC72F, None, "HANGUL SYLLABLE YULH", 0x31, "Hangul"),
    c(0xC730, None, "HANGUL SYLLABLE YUM", 0x31, "Hangul"),
    c(0xC731, None, "HANGUL SYLLABLE YUB", 0x31, "Hangul"),
    c(0xC732, None, "HANGUL SYLLABLE YUBS", 0x31, "Hangul"),
    c(0xC733, None, "HANGUL SYLLABLE YUS", 0x31, "Hangul"),
    c(0xC734, None, "HANGUL SYLLABLE YUSS", 0x31, "Hangul"),
    c(0xC735, None, "HANGUL SYLLABLE YUNG", 0x31, "Hangul"),
    c(0xC736, None, "HANGUL SYLLABLE YUJ", 0x31, "Hangul"),
    c(0xC737, None, "HANGUL SYLLABLE YUC", 0x31, "Hangul"),
    c(0xC738, None, "HANGUL SYLLABLE YUK", 0x31, "Hangul"),
    c(0xC739, None, "HANGUL SYLLABLE YUT", 0x31, "Hangul"),
    c(0xC73A, None, "HANGUL SYLLABLE YUP", 0x31, "Hangul"),
    c(0xC73B, None, "HANGUL SYLLABLE YUH", 0x31, "Hangul"),
    c(0xC73C, None, "HANGUL SYLLABLE EU", 0x31, "Hangul"),
    c(0xC73D, None, "HANGUL SYLLABLE EUG", 0x31, "Hangul"),
    c(0xC73E, None, "HANGUL SYLLABLE EUGG", 0x31, "Hangul"),
    c(0xC73F, None, "HANGUL SYLLABLE EUGS", 0x31, "Hangul"),
    c(0xC740, None, "HANGUL SYLLABLE EUN", 0x31, "Hangul"),
    c(0xC741, None, "HANGUL SYLLABLE EUNJ", 0x31, "Hangul"),
    c(0xC742, None, "HANGUL SYLLABLE EUNH", 0x31, "Hangul"),
    c(0xC743, None, "HANGUL SYLLABLE EUD", 0x31, "Hangul"),
    c(0xC744, None, "HANGUL SYLLABLE EUL", 0x31, "Hangul"),
    c(0xC745, None, "HANGUL SYLLABLE EULG", 0x31, "Hangul"),
    c(0xC746, None, "HANGUL SYLLABLE EULM", 0x31, "Hangul"),
    c(0xC747, None, "HANGUL SYLLABLE EULB", 0x31, "Hangul"),
    c(0xC748, None, "HANGUL SYLLABLE EULS", 0x31, "Hangul"),
    c(0xC749, None, "HANGUL SYLLABLE EULT", 0x31, "Hangul"),
    c(0xC74A, None, "HANGUL SYLLABLE EULP", 0x31, "Hangul"),
    c(0xC74B, None, "HANGUL SYLLABLE EULH", 0x31, "Hangul"),
    c(0xC74C, None, "HANGUL SYLLABLE EUM", 0x31, "Hangul"),
    c(0xC74D, None, "HANGUL SYLLABLE EUB", 0x31, "Hangul"),
    c(0xC74E, None, "HANGUL SYLLABLE EUBS", 0x31, "Hangul"),
    c(0xC74F, None, "HANGUL SYLLABLE EUS", 0x31, "Hangul"),
    c(0xC750, None, "HANGUL SYLLABLE EUSS", 0x31, "Hangul"),
    c(0xC751, None, "HANGUL SYLLABLE EUNG", 0x31, "Hangul"),
    c(0xC752, None, "HANGUL SYLLABLE EUJ", 0x31, "Hangul"),
    c(0xC753, None, "HANGUL SYLLABLE EUC", 0x31, "Hangul"),
    c(0xC754, None, "HANGUL SYLLABLE EUK", 0x31, "Hangul"),
    c(0xC755, None, "HANGUL SYLLABLE EUT", 0x31, "Hangul"),
    c(0xC756, None, "HANGUL SYLLABLE EUP", 0x31, "Hangul"),
    c(0xC757, None, "HANGUL SYLLABLE EUH", 0x31, "Hangul"),
    c(0xC758, None, "HANGUL SYLLABLE YI", 0x31, "Hangul"),
    c(0xC759, None, "HANGUL SYLLABLE YIG", 0x31, "Hangul"),
    c(0xC75A, None, "HANGUL SYLLABLE YIGG", 0x31, "Hangul"),
    c(0xC75B, None, "HANGUL SYLLABLE YIGS", 0x31, "Hangul"),
    c(0xC75C, None, "HANGUL SYLLABLE YIN", 0x31, "Hangul"),
    c(0xC75D, None, "HANGUL SYLLABLE YINJ", 0x31, "Hangul"),
    c(0xC75E, None, "HANGUL SYLLABLE YINH", 0x31, "Hangul"),
    c(0xC75F, None, "HANGUL SYLLABLE YID", 0x31, "Hangul"),
    c(0xC760, None, "HANGUL SYLLABLE YIL", 0x31, "Hangul"),
    c(0xC761, None, "HANGUL SYLLABLE YILG", 0x31, "Hangul"),
    c(0xC762, None, "HANGUL SYLLABLE YILM", 0x31, "Hangul"),
    c(0xC763, None, "HANGUL SYLLABLE YILB", 0x31, "Hangul"),
    c(0xC764, None, "HANGUL SYLLABLE YILS", 0x31, "Hangul"),
    c(0xC765, None, "HANGUL SYLLABLE YILT", 0x31, "Hangul"),
    c(0xC766, None, "HANGUL SYLLABLE YILP", 0x31, "Hangul"),
    c(0xC767, None, "HANGUL SYLLABLE YILH", 0x31, "Hangul"),
    c(0xC768, None, "HANGUL SYLLABLE YIM", 0x31, "Hangul"),
    c(0xC769, None, "HANGUL SYLLABLE YIB", 0x31, "Hangul"),
    c(0xC76A, None, "HANGUL SYLLABLE YIBS", 0x31, "Hangul"),
    c(0xC76B, None, "HANGUL SYLLABLE YIS", 0x31, "Hangul"),
    c(0xC76C, None, "HANGUL SYLLABLE YISS", 0x31, "Hangul"),
    c(0xC76D, None, "HANGUL SYLLABLE YING", 0x31, "Hangul"),
    c(0xC76E, None, "HANGUL SYLLABLE YIJ", 0x31, "Hangul"),
    c(0xC76F, None, "HANGUL SYLLABLE YIC", 0x31, "Hangul"),
    c(0xC770, None, "HANGUL SYLLABLE YIK", 0x31, "Hangul"),
    c(0xC771, None, "HANGUL SYLLABLE YIT", 0x31, "Hangul"),
    c(0xC772, None, "HANGUL SYLLABLE YIP", 0x31, "Hangul"),
    c(0xC773, None, "HANGUL SYLLABLE YIH", 0x31, "Hangul"),
    c(0xC774, None, "HANGUL SYLLABLE I", 0x31, "Hangul"),
    c(0xC775, None, "HANGUL SYLLABLE IG", 0x31, "Hangul"),
    c(0xC776, None, "HANGUL SYLLABLE IGG", 0x31, "Hangul"),
    c(0xC777, None, "HANGUL SYLLABLE IGS", 0x31, "Hangul"),
    c(0xC778, None, "HANGUL SYLLABLE IN", 0x31, "Hangul"),
    c(0xC779, None, "HANGUL SYLLABLE INJ", 0x31, "Hangul"),
    c(0xC77A, None, "HANGUL SYLLABLE INH", 0x31, "Hangul"),
    c(0xC77B, None, "HANGUL SYLLABLE ID", 0x31, "Hangul"),
    c(0xC77C, None, "HANGUL SYLLABLE IL", 0x31, "Hangul"),
    c(0xC77D, None, "HANGUL SYLLABLE ILG", 0x31, "Hangul"),
    c(0xC77E, None, "HANGUL SYLLABLE ILM", 0x31, "Hangul"),
    c(0xC77F, None, "HANGUL SYLLABLE ILB", 0x31, "Hangul"),
    c(0xC780, None, "HANGUL SYLLABLE ILS", 0x31, "Hangul"),
    c(0xC781, None, "HANGUL SYLLABLE ILT", 0x31, "Hangul"),
    c(0xC782, None, "HANGUL SYLLABLE ILP", 0x31, "Hangul"),
    c(0xC783, None, "HANGUL SYLLABLE ILH", 0x31, "Hangul"),
    c(0xC784, None, "HANGUL SYLLABLE IM", 0x31, "Hangul"),
    c(0xC785, None, "HANGUL SYLLABLE IB", 0x31, "Hangul"),
    c(0xC786, None, "HANGUL SYLLABLE IBS", 0x31, "Hangul"),
    c(0xC787, None, "HANGUL SYLLABLE IS", 0x31, "Hangul"),
    c(0xC788, None, "HANGUL SYLLABLE ISS", 0x31, "Hangul"),
    c(0xC789, None, "HANGUL SYLLABLE ING", 0x31, "Hangul"),
    c(0xC78A, None, "HANGUL SYLLABLE IJ", 0x31, "Hangul"),
    c(0xC78B, None, "HANGUL SYLLABLE IC", 0x31, "Hangul"),
    c(0xC78C, None, "HANGUL SYLLABLE IK", 0x31, "Hangul"),
    c(0xC78D, None, "HANGUL SYLLABLE IT", 0x31, "Hangul"),
    c(0xC78E, None, "HANGUL SYLLABLE IP", 0x31, "Hangul"),
    c(0xC78F, None, "HANGUL SYLLABLE IH", 0x31, "Hangul"),
    c(0xC790, None, "HANGUL SYLLABLE JA", 0x31, "Hangul"),
    c(0xC791, None, "HANGUL SYLLABLE JAG", 0x31, "Hangul"),
    c(0xC792, None, "HANGUL SYLLABLE JAGG", 0x31, "Hangul"),
    c(0xC793, None, "HANGUL SYLLABLE JAGS", 0x31, "Hangul"),
    c(0xC794, None, "HANGUL SYLLABLE JAN", 0x31, "Hangul"),
    c(0xC795, None, "HANGUL SYLLABLE JANJ", 0x31, "Hangul"),
    c(0xC796, None, "HANGUL SYLLABLE JANH", 0x31, "Hangul"),
    c(0xC797, None, "HANGUL SYLLABLE JAD", 0x31, "Hangul"),
    c(0xC798, None, "HANGUL SYLLABLE JAL", 0x31, "Hangul"),
    c(0xC799, None, "HANGUL SYLLABLE JALG", 0x31, "Hangul"),
    c(0xC79A, None, "HANGUL SYLLABLE JALM", 0x31, "Hangul"),
    c(0xC79B, None, "HANGUL SYLLABLE JALB", 0x31, "Hangul"),
    c(0xC79C, None, "HANGUL SYLLABLE JALS", 0x31, "Hangul"),
    c(0xC79D, None, "HANGUL SYLLABLE JALT", 0x31, "Hangul"),
    c(0xC79E, None, "HANGUL SYLLABLE JALP", 0x31, "Hangul"),
    c(0xC79F, None, "HANGUL SYLLABLE JALH", 0x31, "Hangul"),
    c(0xC7A0, None, "HANGUL SYLLABLE JAM", 0x31, "Hangul"),
    c(0xC7A1, None, "HANGUL SYLLABLE JAB", 0x31, "Hangul"),
    c(0xC7A2, None, "HANGUL SYLLABLE JABS", 0x31, "Hangul"),
    c(0xC7A3, None, "HANGUL SYLLABLE JAS", 0x31, "Hangul"),
    c(0xC7A4, None, "HANGUL SYLLABLE JASS", 0x31, "Hangul"),
    c(0xC7A5, None, "HANGUL SYLLABLE JANG", 0x31, "Hangul"),
    c(0xC7A6, None, "HANGUL SYLLABLE JAJ", 0x31, "Hangul"),
    c(0xC7A7, None, "HANGUL SYLLABLE JAC", 0x31, "Hangul"),
    c(0xC7A8, None, "HANGUL SYLLABLE JAK", 0x31, "Hangul"),
    c(0xC7A9, None, "HANGUL SYLLABLE JAT", 0x31, "Hangul"),
    c(0xC7AA, None, "HANGUL SYLLABLE JAP", 0x31, "Hangul"),
    c(0xC7AB, None, "HANGUL SYLLABLE JAH", 0x31, "Hangul"),
    c(0xC7AC, None, "HANGUL SYLLABLE JAE", 0x31, "Hangul"),
    c(0xC7AD, None, "HANGUL SYLLABLE JAEG", 0x31, "Hangul"),
    c(0xC7AE, None, "HANGUL SYLLABLE JAEGG", 0x31, "Hangul"),
    c(0xC7AF, None, "HANGUL SYLLABLE JAEGS", 0x31, "Hangul"),
    c(0xC7B0, None, "HANGUL SYLLABLE JAEN", 0x31, "Hangul"),
    c(0xC7B1, None, "HANGUL SYLLABLE JAENJ", 0x31, "Hangul"),
    c(0xC7B2, None, "HANGUL SYLLABLE JAENH", 0x31, "Hangul"),
    c(0xC7B3, None, "HANGUL SYLLABLE JAED", 0x31, "Hangul"),
    c(0xC7B4, None, "HANGUL SYLLABLE JAEL", 0x31, "Hangul"),
    c(0xC7B5, None, "HANGUL SYLLABLE JAELG", 0x31, "Hangul"),
    c(0xC7B6, None, "HANGUL SYLLABLE JAELM", 0x31, "Hangul"),
    c(0xC7B7, None, "HANGUL SYLLABLE JAELB", 0x31, "Hangul"),
    c(0xC7B8, None, "HANGUL SYLLABLE JAELS", 0x31, "Hangul"),
    c(0xC7B9, None, "HANGUL SYLLABLE JAELT", 0x31, "Hangul"),
    c(0xC7BA, None, "HANGUL SYLLABLE JAELP", 0x31, "Hangul"),
    c(0xC7BB, None, "HANGUL SYLLABLE JAELH", 0x31, "Hangul"),
    c(0xC7BC, None, "HANGUL SYLLABLE JAEM", 0x31, "Hangul"),
    c(0xC7BD, None, "HANGUL SYLLABLE JAEB", 0x31, "Hangul"),
    c(0xC7BE, None, "HANGUL SYLLABLE JAEBS", 0x31, "Hangul"),
    c(0xC7BF, None, "HANGUL SYLLABLE JAES", 0x31, "Hangul"),
    c(0xC7C0, None, "HANGUL SYLLABLE JAESS", 0x31, "Hangul"),
    c(0xC7C1, None, "HANGUL SYLLABLE JAENG", 0x31, "Hangul"),
    c(0xC7C2, None, "HANGUL SYLLABLE JAEJ", 0x31, "Hangul"),
    c(0xC7C3, None, "HANGUL SYLLABLE JAEC", 0x31, "Hangul"),
    c(0xC7C4, None, "HANGUL SYLLABLE JAEK", 0x31, "Hangul"),
    c(0xC7C5, None, "HANGUL SYLLABLE JAET", 0x31, "Hangul"),
    c(0xC7C6, None, "HANGUL SYLLABLE JAEP", 0x31, "Hangul"),
    c(0xC7C7, None, "HANGUL SYLLABLE JAEH", 0x31, "Hangul"),
    c(0xC7C8, None, "HANGUL SYLLABLE JYA", 0x31, "Hangul"),
    c(0xC7C9, None, "HANGUL SYLLABLE JYAG", 0x31, "Hangul"),
    c(0xC7CA, None, "HANGUL SYLLABLE JYAGG", 0x31, "Hangul"),
    c(0xC7CB, None, "HANGUL SYLLABLE JYAGS", 0x31, "Hangul"),
    c(0xC7CC, None, "HANGUL SYLLABLE JYAN", 0x31, "Hangul"),
    c(0xC7CD, None, "HANGUL SYLLABLE JYANJ", 0x31, "Hangul"),
    c(0xC7CE, None, "HANGUL SYLLABLE JYANH", 0x31, "Hangul"),
    c(0xC7CF, None, "HANGUL SYLLABLE JYAD", 0x31, "Hangul"),
    c(0xC7D0, None, "HANGUL SYLLABLE JYAL", 0x31, "Hangul"),
    c(0xC7D1, None, "HANGUL SYLLABLE JYALG", 0x31, "Hangul"),
    c(0xC7D2, None, "HANGUL SYLLABLE JYALM", 0x31, "Hangul"),
    c(0xC7D3, None, "HANGUL SYLLABLE JYALB", 0x31, "Hangul"),
    c(0xC7D4, None, "HANGUL SYLLABLE JYALS", 0x31, "Hangul"),
    c(0xC7D5, None, "HANGUL SYLLABLE JYALT", 0x31, "Hangul"),
    c(0xC7D6, None, "HANGUL SYLLABLE JYALP", 0x31, "Hangul"),
    c(0xC7D7, None, "HANGUL SYLLABLE JYALH", 0x31, "Hangul"),
    c(0xC7D8, None, "HANGUL SYLLABLE JYAM", 0x31, "Hangul"),
    c(0xC7D9, None, "HANGUL SYLLABLE JYAB", 0x31, "Hangul"),
    c(0xC7DA, None, "HANGUL SYLLABLE JYABS", 0x31, "Hangul"),
    c(0xC7DB, None, "HANGUL SYLLABLE JYAS", 0x31, "Hangul"),
    c(0xC7DC, None, "HANGUL SYLLABLE JYASS", 0x31, "Hangul"),
    c(0xC7DD, None, "HANGUL SYLLABLE JYANG", 0x31, "Hangul"),
    c(0xC7DE, None, "HANGUL SYLLABLE JYAJ", 0x31, "Hangul"),
    c(0xC7DF, None, "HANGUL SYLLABLE JYAC", 0x31, "Hangul"),
    c(0xC7E0, None, "HANGUL SYLLABLE JYAK", 0x31, "Hangul"),
    c(0xC7E1, None, "HANGUL SYLLABLE JYAT", 0x31, "Hangul"),
    c(0xC7E2, None, "HANGUL SYLLABLE JYAP", 0x31, "Hangul"),
    c(0xC7E3, None, "HANGUL SYLLABLE JYAH", 0x31, "Hangul"),
    c(0xC7E4, None, "HANGUL SYLLABLE JYAE", 0x31, "Hangul"),
    c(0xC7E5, None, "HANGUL SYLLABLE JYAEG", 0x31, "Hangul"),
    c(0xC7E6, None, "HANGUL SYLLABLE JYAEGG", 0x31, "Hangul"),
    c(0xC7E7, None, "HANGUL SYLLABLE JYAEGS", 0x31, "Hangul"),
    c(0xC7E8, None, "HANGUL SYLLABLE JYAEN", 0x31, "Hangul"),
    c(0xC7E9, None, "HANGUL SYLLABLE JYAENJ", 0x31, "Hangul"),
    c(0xC7EA, None, "HANGUL SYLLABLE JYAENH", 0x31, "Hangul"),
    c(0xC7EB, None, "HANGUL SYLLABLE JYAED", 0x31, "Hangul"),
    c(0xC7EC, None, "HANGUL SYLLABLE JYAEL", 0x31, "Hangul"),
    c(0xC7ED, None, "HANGUL SYLLABLE JYAELG", 0x31, "Hangul"),
    c(0xC7EE, None, "HANGUL SYLLABLE JYAELM", 0x31, "Hangul"),
    c(0xC7EF, None, "HANGUL SYLLABLE JYAELB", 0x31, "Hangul"),
    c(0xC7F0, None, "HANGUL SYLLABLE JYAELS", 0x31, "Hangul"),
    c(0xC7F1, None, "HANGUL SYLLABLE JYAELT", 0x31, "Hangul"),
    c(0xC7F2, None, "HANGUL SYLLABLE JYAELP", 0x31, "Hangul"),
    c(0xC7F3, None, "HANGUL SYLLABLE JYAELH", 0x31, "Hangul"),
    c(0xC7F4, None, "HANGUL SYLLABLE JYAEM", 0x31, "Hangul"),
    c(0xC7F5, None, "HANGUL SYLLABLE JYAEB", 0x31, "Hangul"),
    c(0xC7F6, None, "HANGUL SYLLABLE JYAEBS", 0x31, "Hangul"),
    c(0xC7F7, None, "HANGUL SYLLABLE JYAES", 0x31, "Hangul"),
    c(0xC7F8, None, "HANGUL SYLLABLE JYAESS", 0x31, "Hangul"),
    c(0xC7F9, None, "HANGUL SYLLABLE JYAENG", 0x31, "Hangul"),
    c(0xC7FA, None, "HANGUL SYLLABLE JYAEJ", 0x31, "Hangul"),
    c(0xC7FB, None, "HANGUL SYLLABLE JYAEC", 0x31, "Hangul"),
    c(0xC7FC, None, "HANGUL SYLLABLE JYAEK", 0x31, "Hangul"),
    c(0xC7FD, None, "HANGUL SYLLABLE JYAET", 0x31, "Hangul"),
    c(0xC7FE, None, "HANGUL SYLLABLE JYAEP", 0x31, "Hangul"),
    c(0xC7FF, None, "HANGUL SYLLABLE JYAEH", 0x31, "Hangul"),
    c(0xC800, None, "HANGUL SYLLABLE JEO", 0x31, "Hangul"),
    c(0xC801, None, "HANGUL SYLLABLE JEOG", 0x31, "Hangul"),
    c(0xC802, None, "HANGUL SYLLABLE JEOGG", 0x31, "Hangul"),
    c(0xC803, None, "HANGUL SYLLABLE JEOGS", 0x31, "Hangul"),
    c(0xC804, None, "HANGUL SYLLABLE JEON", 0x31, "Hangul"),
    c(0xC805, None, "HANGUL SYLLABLE JEONJ", 0x31, "Hangul"),
    c(0xC806, None, "HANGUL SYLLABLE JEONH", 0x31, "Hangul"),
    c(0xC807, None, "HANGUL SYLLABLE JEOD", 0x31, "Hangul"),
    c(0xC808, None, "HANGUL SYLLABLE JEOL", 0x31, "Hangul"),
    c(0xC809, None, "HANGUL SYLLABLE JEOLG", 0x31, "Hangul"),
    c(0xC80A, None, "HANGUL SYLLABLE JEOLM", 0x31, "Hangul"),
    c(0xC80B, None, "HANGUL SYLLABLE JEOLB", 0x31, "Hangul"),
    c(0xC80C, None, "HANGUL SYLLABLE JEOLS", 0x31, "Hangul"),
    c(0xC80D, None, "HANGUL SYLLABLE JEOLT", 0x31, "Hangul"),
    c(0xC80E, None, "HANGUL SYLLABLE JEOLP", 0x31, "Hangul"),
    c(0xC80F, None, "HANGUL SYLLABLE JEOLH", 0x31, "Hangul"),
    c(0xC810, None, "HANGUL SYLLABLE JEOM", 0x31, "Hangul"),
    c(0xC811, None, "HANGUL SYLLABLE JEOB", 0x31, "Hangul"),
    c(0xC812, None, "HANGUL SYLLABLE JEOBS", 0x31, "Hangul"),
    c(0xC813, None, "HANGUL SYLLABLE JEOS", 0x31, "Hangul"),
    c(0xC814, None, "HANGUL SYLLABLE JEOSS", 0x31, "Hangul"),
    c(0xC815, None, "HANGUL SYLLABLE JEONG", 0x31, "Hangul"),
    c(0xC816, None, "HANGUL SYLLABLE JEOJ", 0x31, "Hangul"),
    c(0xC817, None, "HANGUL SYLLABLE JEOC", 0x31, "Hangul"),
    c(0xC818, None, "HANGUL SYLLABLE JEOK", 0x31, "Hangul"),
    c(0xC819, None, "HANGUL SYLLABLE JEOT", 0x31, "Hangul"),
    c(0xC81A, None, "HANGUL SYLLABLE JEOP", 0x31, "Hangul"),
    c(0xC81B, None, "HANGUL SYLLABLE JEOH", 0x31, "Hangul"),
    c(0xC81C, None, "HANGUL SYLLABLE JE", 0x31, "Hangul"),
    c(0xC81D, None, "HANGUL SYLLABLE JEG", 0x31, "Hangul"),
    c(0xC81E, None, "HANGUL SYLLABLE JEGG", 0x31, "Hangul"),
    c(0xC81F, None, "HANGUL SYLLABLE JEGS", 0x31, "Hangul"),
    c(0xC820, None, "HANGUL SYLLABLE JEN", 0x31, "Hangul"),
    c(0xC821, None, "HANGUL SYLLABLE JENJ", 0x31, "Hangul"),
    c(0xC822, None, "HANGUL SYLLABLE JENH", 0x31, "Hangul"),
    c(0xC823, None, "HANGUL SYLLABLE JED", 0x31, "Hangul"),
    c(0xC824, None, "HANGUL SYLLABLE JEL", 0x31, "Hangul"),
    c(0xC825, None, "HANGUL SYLLABLE JELG", 0x31, "Hangul"),
    c(0xC826, None, "HANGUL SYLLABLE JELM", 0x31, "Hangul"),
    c(0xC827, None, "HANGUL SYLLABLE JELB", 0x31, "Hangul"),
    c(0xC828, None, "HANGUL SYLLABLE JELS", 0x31, "Hangul"),
    c(0xC829, None, "HANGUL SYLLABLE JELT", 0x31, "Hangul"),
    c(0xC82A, None, "HANGUL SYLLABLE JELP", 0x31, "Hangul"),
    c(0xC82B, None, "HANGUL SYLLABLE JELH", 0x31, "Hangul"),
    c(0xC82C, None, "HANGUL SYLLABLE JEM", 0x31, "Hangul"),
    c(0xC82D, None, "HANGUL SYLLABLE JEB", 0x31, "Hangul"),
    c(0xC82E, None, "HANGUL SYLLABLE JEBS", 0x31, "Hangul"),
    c(0xC82F, None, "HANGUL SYLLABLE JES", 0x31, "Hangul"),
    c(0xC830, None, "HANGUL SYLLABLE JESS", 0x31, "Hangul"),
    c(0xC831, None, "HANGUL SYLLABLE JENG", 0x31, "Hangul"),
    c(0xC832, None, "HANGUL SYLLABLE JEJ", 0x31, "Hangul"),
    c(0xC833, None, "HANGUL SYLLABLE JEC", 0x31, "Hangul"),
    c(0xC834, None, "HANGUL SYLLABLE JEK", 0x31, "Hangul"),
    c(0xC835, None, "HANGUL SYLLABLE JET", 0x31, "Hangul"),
    c(0xC836, None, "HANGUL SYLLABLE JEP", 0x31, "Hangul"),
    c(0xC837, None, "HANGUL SYLLABLE JEH", 0x31, "Hangul"),
    c(0xC838, None, "HANGUL SYLLABLE JYEO", 0x31, "Hangul"),
    c(0xC839, None, "HANGUL SYLLABLE JYEOG", 0x31, "Hangul"),
    c(0xC83A, None, "HANGUL SYLLABLE JYEOGG", 0x31, "Hangul"),
    c(0xC83B, None, "HANGUL SYLLABLE JYEOGS", 0x31, "Hangul"),
    c(0xC83C, None, "HANGUL SYLLABLE JYEON", 0x31, "Hangul"),
    c(0xC83D, None, "HANGUL SYLLABLE JYEONJ", 0x31, "Hangul"),
    c(0xC83E, None, "HANGUL SYLLABLE JYEONH", 0x31, "Hangul"),
    c(0xC83F, None, "HANGUL SYLLABLE JYEOD", 0x31, "Hangul"),
    c(0xC840, None, "HANGUL SYLLABLE JYEOL", 0x31, "Hangul"),
    c(0xC841, None, "HANGUL SYLLABLE JYEOLG", 0x31, "Hangul"),
    c(0xC842, None, "HANGUL SYLLABLE JYEOLM", 0x31, "Hangul"),
    c(0xC843, None, "HANGUL SYLLABLE JYEOLB", 0x31, "Hangul"),
    c(0xC844, None, "HANGUL SYLLABLE JYEOLS", 0x31, "Hangul"),
    c(0xC845, None, "HANGUL SYLLABLE JYEOLT", 0x31, "Hangul"),
    c(0xC846, None, "HANGUL SYLLABLE JYEOLP", 0x31, "Hangul"),
    c(0xC847, None, "HANGUL SYLLABLE JYEOLH", 0x31, "Hangul"),
    c(0xC848, None, "HANGUL SYLLABLE JYEOM", 0x31, "Hangul"),
    c(0xC849, None, "HANGUL SYLLABLE JYEOB", 0x31, "Hangul"),
    c(0xC84A, None, "HANGUL SYLLABLE JYEOBS", 0x31, "Hangul"),
    c(0xC84B, None, "HANGUL SYLLABLE JYEOS", 0x31, "Hangul"),
    c(0xC84C, None, "HANGUL SYLLABLE JYEOSS", 0x31, "Hangul"),
    c(0xC84D, None, "HANGUL SYLLABLE JYEONG", 0x31, "Hangul"),
    c(0xC84E, None, "HANGUL SYLLABLE JYEOJ", 0x31, "Hangul"),
    c(0xC84F, None, "HANGUL SYLLABLE JYEOC", 0x31, "Hangul"),
    c(0xC850, None, "HANGUL SYLLABLE JYEOK", 0x31, "Hangul"),
    c(0xC851, None, "HANGUL SYLLABLE JYEOT", 0x31, "Hangul"),
    c(0xC852, None, "HANGUL SYLLABLE JYEOP", 0x31, "Hangul"),
    c(0xC853, None, "HANGUL SYLLABLE JYEOH", 0x31, "Hangul"),
    c(0xC854, None, "HANGUL SYLLABLE JYE", 0x31, "Hangul"),
    c(0xC855, None, "HANGUL SYLLABLE JYEG", 0x31, "Hangul"),
    c(0xC856, None, "HANGUL SYLLABLE JYEGG", 0x31, "Hangul"),
    c(0xC857, None, "HANGUL SYLLABLE JYEGS", 0x31, "Hangul"),
    c(0xC858, None, "HANGUL SYLLABLE JYEN", 0x31, "Hangul"),
    c(0xC859, None, "HANGUL SYLLABLE JYENJ", 0x31, "Hangul"),
    c(0xC85A, None, "HANGUL SYLLABLE JYENH", 0x31, "Hangul"),
    c(0xC85B, None, "HANGUL SYLLABLE JYED", 0x31, "Hangul"),
    c(0xC85C, None, "HANGUL SYLLABLE JYEL", 0x31, "Hangul"),
    c(0xC85D, None, "HANGUL SYLLABLE JYELG", 0x31, "Hangul"),
    c(0xC85E, None, "HANGUL SYLLABLE JYELM", 0x31, "Hangul"),
    c(0xC85F, None, "HANGUL SYLLABLE JYELB", 0x31, "Hangul"),
    c(0xC860, None, "HANGUL SYLLABLE JYELS", 0x31, "Hangul"),
    c(0xC861, None, "HANGUL SYLLABLE JYELT", 0x31, "Hangul"),
    c(0xC862, None, "HANGUL SYLLABLE JYELP", 0x31, "Hangul"),
    c(0xC863, None, "HANGUL SYLLABLE JYELH", 0x31, "Hangul"),
    c(0xC864, None, "HANGUL SYLLABLE JYEM", 0x31, "Hangul"),
    c(0xC865, None, "HANGUL SYLLABLE JYEB", 0x31, "Hangul"),
    c(0xC866, None, "HANGUL SYLLABLE JYEBS", 0x31, "Hangul"),
    c(0xC867, None, "HANGUL SYLLABLE JYES", 0x31, "Hangul"),
    c(0xC868, None, "HANGUL SYLLABLE JYESS", 0x31, "Hangul"),
    c(0xC869, None, "HANGUL SYLLABLE JYENG", 0x31, "Hangul"),
    c(0xC86A, None, "HANGUL SYLLABLE JYEJ", 0x31, "Hangul"),
    c(0xC86B, None, "HANGUL SYLLABLE JYEC", 0x31, "Hangul"),
    c(0xC86C, None, "HANGUL SYLLABLE JYEK", 0x31, "Hangul"),
    c(0xC86D, None, "HANGUL SYLLABLE JYET", 0x31, "Hangul"),
    c(0xC86E, None, "HANGUL SYLLABLE JYEP", 0x31, "Hangul"),
    c(0xC86F, None, "HANGUL SYLLABLE JYEH", 0x31, "Hangul"),
    c(0xC870, None, "HANGUL SYLLABLE JO", 0x31, "Hangul"),
    c(0xC871, None, "HANGUL SYLLABLE JOG", 0x31, "Hangul"),
    c(0xC872, None, "HANGUL SYLLABLE JOGG", 0x31, "Hangul"),
    c(0xC873, None, "HANGUL SYLLABLE JOGS", 0x31, "Hangul"),
    c(0xC874, None, "HANGUL SYLLABLE JON", 0x31, "Hangul"),
    c(0xC875, None, "HANGUL SYLLABLE JONJ", 0x31, "Hangul"),
    c(0xC876, None, "HANGUL SYLLABLE JONH", 0x31, "Hangul"),
    c(0xC877, None, "HANGUL SYLLABLE JOD", 0x31, "Hangul"),
    c(0xC878, None, "HANGUL SYLLABLE JOL", 0x31, "Hangul"),
    c(0xC879, None, "HANGUL SYLLABLE JOLG", 0x31, "Hangul"),
    c(0xC87A, None, "HANGUL SYLLABLE JOLM", 0x31, "Hangul"),
    c(0xC87B, None, "HANGUL SYLLABLE JOLB", 0x31, "Hangul"),
    c(0xC87C, None, "HANGUL SYLLABLE JOLS", 0x31, "Hangul"),
    c(0xC87D, None, "HANGUL SYLLABLE JOLT", 0x31, "Hangul"),
    c(0xC87E, None, "HANGUL SYLLABLE JOLP", 0x31, "Hangul"),
    c(0xC87F, None, "HANGUL SYLLABLE JOLH", 0x31, "Hangul"),
    c(0xC880, None, "HANGUL SYLLABLE JOM", 0x31, "Hangul"),
    c(0xC881, None, "HANGUL SYLLABLE JOB", 0x31, "Hangul"),
    c(0xC882, None, "HANGUL SYLLABLE JOBS", 0x31, "Hangul"),
    c(0xC883, None, "HANGUL SYLLABLE JOS", 0x31, "Hangul"),
    c(0xC884, None, "HANGUL SYLLABLE JOSS", 0x31, "Hangul"),
    c(0xC885, None, "HANGUL SYLLABLE JONG", 0x31, "Hangul"),
    c(0xC886, None, "HANGUL SYLLABLE JOJ", 0x31, "Hangul"),
    c(0xC887, None, "HANGUL SYLLABLE JOC", 0x31, "Hangul"),
    c(0xC888, None, "HANGUL SYLLABLE JOK", 0x31, "Hangul"),
    c(0xC889, None, "HANGUL SYLLABLE JOT", 0x31, "Hangul"),
    c(0xC88A, None, "HANGUL SYLLABLE JOP", 0x31, "Hangul"),
    c(0xC88B, None, "HANGUL SYLLABLE JOH", 0x31, "Hangul"),
    c(0xC88C, None, "HANGUL SYLLABLE JWA", 0x31, "Hangul"),
    c(0xC88D, None, "HANGUL SYLLABLE JWAG", 0x31, "Hangul"),
    c(0xC88E, None, "HANGUL SYLLABLE JWAGG", 0x31, "Hangul"),
    c(0xC88F, None, "HANGUL SYLLABLE JWAGS", 0x31, "Hangul"),
    c(0xC890, None, "HANGUL SYLLABLE JWAN", 0x31, "Hangul"),
    c(0xC891, None, "HANGUL SYLLABLE JWANJ", 0x31, "Hangul"),
    c(0xC892, None, "HANGUL SYLLABLE JWANH", 0x31, "Hangul"),
    c(0xC893, None, "HANGUL SYLLABLE JWAD", 0x31, "Hangul"),
    c(0xC894, None, "HANGUL SYLLABLE JWAL", 0x31, "Hangul"),
    c(0xC895, None, "HANGUL SYLLABLE JWALG", 0x31, "Hangul"),
    c(0xC896, None, "HANGUL SYLLABLE JWALM", 0x31, "Hangul"),
    c(0xC897, None, "HANGUL SYLLABLE JWALB", 0x31, "Hangul"),
    c(0xC898, None, "HANGUL SYLLABLE JWALS", 0x31, "Hangul"),
    c(0xC899, None, "HANGUL SYLLABLE JWALT", 0x31, "Hangul"),
    c(0xC89A, None, "HANGUL SYLLABLE JWALP", 0x31, "Hangul"),
    c(0xC89B, None, "HANGUL SYLLABLE JWALH", 0x31, "Hangul"),
    c(0xC89C, None, "HANGUL SYLLABLE JWAM", 0x31, "Hangul"),
    c(0xC89D, None, "HANGUL SYLLABLE JWAB", 0x31, "Hangul"),
    c(0xC89E, None, "HANGUL SYLLABLE JWABS", 0x31, "Hangul"),
    c(0xC89F, None, "HANGUL SYLLABLE JWAS", 0x31, "Hangul"),
    c(0xC8A0, None, "HANGUL SYLLABLE JWASS", 0x31, "Hangul"),
    c(0xC8A1, None, "HANGUL SYLLABLE JWANG", 0x31, "Hangul"),
    c(0xC8A2, None, "HANGUL SYLLABLE JWAJ", 0x31, "Hangul"),
    c(0xC8A3, None, "HANGUL SYLLABLE JWAC", 0x31, "Hangul"),
    c(0xC8A4, None, "HANGUL SYLLABLE JWAK", 0x31, "Hangul"),
    c(0xC8A5, None, "HANGUL SYLLABLE JWAT", 0x31, "Hangul"),
    c(0xC8A6, None, "HANGUL SYLLABLE JWAP", 0x31, "Hangul"),
    c(0xC8A7, None, "HANGUL SYLLABLE JWAH", 0x31, "Hangul"),
    c(0xC8A8, None, "HANGUL SYLLABLE JWAE", 0x31, "Hangul"),
    c(0xC8A9, None, "HANGUL SYLLABLE JWAEG", 0x31, "Hangul"),
    c(0xC8AA, None, "HANGUL SYLLABLE JWAEGG", 0x31, "Hangul"),
    c(0xC8AB, None, "HANGUL SYLLABLE JWAEGS", 0x31, "Hangul"),
    c(0xC8AC, None, "HANGUL SYLLABLE JWAEN", 0x31, "Hangul"),
    c(0xC8AD, None, "HANGUL SYLLABLE JWAENJ", 0x31, "Hangul"),
    c(0xC8AE, None, "HANGUL SYLLABLE JWAENH", 0x31, "Hangul"),
    c(0xC8AF, None, "HANGUL SYLLABLE JWAED", 0x31, "Hangul"),
    c(0xC8B0, None, "HANGUL SYLLABLE JWAEL", 0x31, "Hangul"),
    c(0xC8B1, None, "HANGUL SYLLABLE JWAELG", 0x31, "Hangul"),
    c(0xC8B2, None, "HANGUL SYLLABLE JWAELM", 0x31, "Hangul"),
    c(0xC8B3, None, "HANGUL SYLLABLE JWAELB", 0x31, "Hangul"),
    c(0xC8B4, None, "HANGUL SYLLABLE JWAELS", 0x31, "Hangul"),
    c(0xC8B5, None, "HANGUL SYLLABLE JWAELT", 0x31, "Hangul"),
    c(0xC8B6, None, "HANGUL SYLLABLE JWAELP", 0x31, "Hangul"),
    c(0xC8B7, None, "HANGUL SYLLABLE JWAELH", 0x31, "Hangul"),
    c(0xC8B8, None, "HANGUL SYLLABLE JWAEM", 0x31, "Hangul"),
    c(0xC8B9, None, "HANGUL SYLLABLE JWAEB", 0x31, "Hangul"),
    c(0xC8BA, None, "HANGUL SYLLABLE JWAEBS", 0x31, "Hangul"),
    c(0xC8BB, None, "HANGUL SYLLABLE JWAES", 0x31, "Hangul"),
    c(0xC8BC, None, "HANGUL SYLLABLE JWAESS", 0x31, "Hangul"),
    c(0xC8BD, None, "HANGUL SYLLABLE JWAENG", 0x31, "Hangul"),
    c(0xC8BE, None, "HANGUL SYLLABLE JWAEJ", 0x31, "Hangul"),
    c(0xC8BF, None, "HANGUL SYLLABLE JWAEC", 0x31, "Hangul"),
    c(0xC8C0, None, "HANGUL SYLLABLE JWAEK", 0x31, "Hangul"),
    c(0xC8C1, None, "HANGUL SYLLABLE JWAET", 0x31, "Hangul"),
    c(0xC8C2, None, "HANGUL SYLLABLE JWAEP", 0x31, "Hangul"),
    c(0xC8C3, None, "HANGUL SYLLABLE JWAEH", 0x31, "Hangul"),
    c(0xC8C4, None, "HANGUL SYLLABLE JOE", 0x31, "Hangul"),
    c(0xC8C5, None, "HANGUL SYLLABLE JOEG", 0x31, "Hangul"),
    c(0xC8C6, None, "HANGUL SYLLABLE JOEGG", 0x31, "Hangul"),
    c(0xC8C7, None, "HANGUL SYLLABLE JOEGS", 0x31, "Hangul"),
    c(0xC8C8, None, "HANGUL SYLLABLE JOEN", 0x31, "Hangul"),
    c(0xC8C9, None, "HANGUL SYLLABLE JOENJ", 0x31, "Hangul"),
    c(0xC8CA, None, "HANGUL SYLLABLE JOENH", 0x31, "Hangul"),
    c(0xC8CB, None, "HANGUL SYLLABLE JOED", 0x31, "Hangul"),
    c(0xC8CC, None, "HANGUL SYLLABLE JOEL", 0x31, "Hangul"),
    c(0xC8CD, None, "HANGUL SYLLABLE JOELG", 0x31, "Hangul"),
    c(0xC8CE, None, "HANGUL SYLLABLE JOELM", 0x31, "Hangul"),
    c(0xC8CF, None, "HANGUL SYLLABLE JOELB", 0x31, "Hangul"),
    c(0xC8D0, None, "HANGUL SYLLABLE JOELS", 0x31, "Hangul"),
    c(0xC8D1, None, "HANGUL SYLLABLE JOELT", 0x31, "Hangul"),
    c(0xC8D2, None, "HANGUL SYLLABLE JOELP", 0x31, "Hangul"),
    c(0xC8D3, None, "HANGUL SYLLABLE JOELH", 0x31, "Hangul"),
    c(0xC8D4, None, "HANGUL SYLLABLE JOEM", 0x31, "Hangul"),
    c(0xC8D5, None, "HANGUL SYLLABLE JOEB", 0x31, "Hangul"),
    c(0xC8D6, None, "HANGUL SYLLABLE JOEBS", 0x31, "Hangul"),
    c(0xC8D7, None, "HANGUL SYLLABLE JOES", 0x31, "Hangul"),
    c(0xC8D8, None, "HANGUL SYLLABLE JOESS", 0x31, "Hangul"),
    c(0xC8D9, None, "HANGUL SYLLABLE JOENG", 0x31, "Hangul"),
    c(0xC8DA, None, "HANGUL SYLLABLE JOEJ", 0x31, "Hangul"),
    c(0xC8DB, None, "HANGUL SYLLABLE JOEC", 0x31, "Hangul"),
    c(0xC8DC, None, "HANGUL SYLLABLE JOEK", 0x31, "Hangul"),
    c(0xC8DD, None, "HANGUL SYLLABLE JOET", 0x31, "Hangul"),
    c(0xC8DE, None, "HANGUL SYLLABLE JOEP", 0x31, "Hangul"),
    c(0xC8DF, None, "HANGUL SYLLABLE JOEH", 0x31, "Hangul"),
    c(0xC8E0, None, "HANGUL SYLLABLE JYO", 0x31, "Hangul"),
    c(0xC8E1, None, "HANGUL SYLLABLE JYOG", 0x31, "Hangul"),
    c(0xC8E2, None, "HANGUL SYLLABLE JYOGG", 0x31, "Hangul"),
    c(0xC8E3, None, "HANGUL SYLLABLE JYOGS", 0x31, "Hangul"),
    c(0xC8E4, None, "HANGUL SYLLABLE JYON", 0x31, "Hangul"),
    c(0xC8E5, None, "HANGUL SYLLABLE JYONJ", 0x31, "Hangul"),
    c(0xC8E6, None, "HANGUL SYLLABLE JYONH", 0x31, "Hangul"),
    c(0xC8E7, None, "HANGUL SYLLABLE JYOD", 0x31, "Hangul"),
    c(0xC8E8, None, "HANGUL SYLLABLE JYOL", 0x31, "Hangul"),
    c(0xC8E9, None, "HANGUL SYLLABLE JYOLG", 0x31, "Hangul"),
    c(0xC8EA, None, "HANGUL SYLLABLE JYOLM", 0x31, "Hangul"),
    c(0xC8EB, None, "HANGUL SYLLABLE JYOLB", 0x31, "Hangul"),
    c(0xC8EC, None, "HANGUL SYLLABLE JYOLS", 0x31, "Hangul"),
    c(0xC8ED, None, "HANGUL SYLLABLE JYOLT", 0x31, "Hangul"),
    c(0xC8EE, None, "HANGUL SYLLABLE JYOLP", 0x31, "Hangul"),
    c(0xC8EF, None, "HANGUL SYLLABLE JYOLH", 0x31, "Hangul"),
    c(0xC8F0, None, "HANGUL SYLLABLE JYOM", 0x31, "Hangul"),
    c(0xC8F1, None, "HANGUL SYLLABLE JYOB", 0x31, "Hangul"),
    c(0xC8F2, None, "HANGUL SYLLABLE JYOBS", 0x31, "Hangul"),
    c(0xC8F3, None, "HANGUL SYLLABLE JYOS", 0x31, "Hangul"),
    c(0xC8F4, None, "HANGUL SYLLABLE JYOSS", 0x31, "Hangul"),
    c(0xC8F5, None, "HANGUL SYLLABLE JYONG", 0x31, "Hangul"),
    c(0xC8F6, None, "HANGUL SYLLABLE JYOJ", 0x31, "Hangul"),
    c(0xC8F7, None, "HANGUL SYLLABLE JYOC", 0x31, "Hangul"),
    c(0xC8F8, None, "HANGUL SYLLABLE JYOK", 0x31, "Hangul"),
    c(0xC8F9, None, "HANGUL SYLLABLE JYOT", 0x31, "Hangul"),
    c(0xC8FA, None, "HANGUL SYLLABLE JYOP", 0x31, "Hangul"),
    c(0xC8FB, None, "HANGUL SYLLABLE JYOH", 0x31, "Hangul"),
    c(0xC8FC, None, "HANGUL SYLLABLE JU", 0x31, "Hangul"),
    c(0xC8FD, None, "HANGUL SYLLABLE JUG", 0x31, "Hangul"),
    c(0xC8FE, None, "HANGUL SYLLABLE JUGG", 0x31, "Hangul"),
    c(0xC8FF, None, "HANGUL SYLLABLE JUGS", 0x31, "Hangul"),
    c(0xC900, None, "HANGUL SYLLABLE JUN", 0x31, "Hangul"),
    c(0xC901, None, "HANGUL SYLLABLE JUNJ", 0x31, "Hangul"),
    c(0xC902, None, "HANGUL SYLLABLE JUNH", 0x31, "Hangul"),
    c(0xC903, None, "HANGUL SYLLABLE JUD", 0x31, "Hangul"),
    c(0xC904, None, "HANGUL SYLLABLE JUL", 0x31, "Hangul"),
    c(0xC905, None, "HANGUL SYLLABLE JULG", 0x31, "Hangul"),
    c(0xC906, None, "HANGUL SYLLABLE JULM", 0x31, "Hangul"),
    c(0xC907, None, "HANGUL SYLLABLE JULB", 0x31, "Hangul"),
    c(0xC908, None, "HANGUL SYLLABLE JULS", 0x31, "Hangul"),
    c(0xC909, None, "HANGUL SYLLABLE JULT", 0x31, "Hangul"),
    c(0xC90A, None, "HANGUL SYLLABLE JULP", 0x31, "Hangul"),
    c(0xC90B, None, "HANGUL SYLLABLE JULH", 0x31, "Hangul"),
    c(0xC90C, None, "HANGUL SYLLABLE JUM", 0x31, "Hangul"),
    c(0xC90D, None, "HANGUL SYLLABLE JUB", 0x31, "Hangul"),
    c(0xC90E, None, "HANGUL SYLLABLE JUBS", 0x31, "Hangul"),
    c(0xC90F, None, "HANGUL SYLLABLE JUS", 0x31, "Hangul"),
    c(0xC910, None, "HANGUL SYLLABLE JUSS", 0x31, "Hangul"),
    c(0xC911, None, "HANGUL SYLLABLE JUNG", 0x31, "Hangul"),
    c(0xC912, None, "HANGUL SYLLABLE JUJ", 0x31, "Hangul"),
    c(0xC913, None, "HANGUL SYLLABLE JUC", 0x31, "Hangul"),
    c(0xC914, None, "HANGUL SYLLABLE JUK", 0x31, "Hangul"),
    c(0xC915, None, "HANGUL SYLLABLE JUT", 0x31, "Hangul"),
    c(0xC916, None, "HANGUL SYLLABLE JUP", 0x31, "Hangul"),
    c(0xC917, None, "HANGUL SYLLABLE JUH", 0x31, "Hangul"),
    c(0xC918, None, "HANGUL SYLLABLE JWEO", 0x31, "Hangul"),
    c(0xC919, None, "HANGUL SYLLABLE JWEOG", 0x31, "Hangul"),
    c(0xC91A, None, "HANGUL SYLLABLE JWEOGG", 0x31, "Hangul"),
    c(0xC91B, None, "HANGUL SYLLABLE JWEOGS", 0x31, "Hangul"),
    c(0xC91C, None, "HANGUL SYLLABLE JWEON", 0x31, "Hangul"),
    c(0xC91D, None, "HANGUL SYLLABLE JWEONJ", 0x31, "Hangul"),
    c(0xC91E, None, "HANGUL SYLLABLE JWEONH", 0x31, "Hangul"),
    c(0xC91F, None, "HANGUL SYLLABLE JWEOD", 0x31, "Hangul"),
    c(0xC920, None, "HANGUL SYLLABLE JWEOL", 0x31, "Hangul"),
    c(0xC921, None, "HANGUL SYLLABLE JWEOLG", 0x31, "Hangul"),
    c(0xC922, None, "HANGUL SYLLABLE JWEOLM", 0x31, "Hangul"),
    c(0xC923, None, "HANGUL SYLLABLE JWEOLB", 0x31, "Hangul"),
    c(0xC924, None, "HANGUL SYLLABLE JWEOLS", 0x31, "Hangul"),
    c(0xC925, None, "HANGUL SYLLABLE JWEOLT", 0x31, "Hangul"),
    c(0xC926, None, "HANGUL SYLLABLE JWEOLP", 0x31, "Hangul"),
    c(0xC927, None, "HANGUL SYLLABLE JWEOLH", 0x31, "Hangul"),
    c(0xC928, None, "HANGUL SYLLABLE JWEOM", 0x31, "Hangul"),
    c(0xC929, None, "HANGUL SYLLABLE JWEOB", 0x31, "Hangul"),
    c(0xC92A, None, "HANGUL SYLLABLE JWEOBS", 0x31, "Hangul"),
    c(0xC92B, None, "HANGUL SYLLABLE JWEOS", 0x31, "Hangul"),
    c(0xC92C, None, "HANGUL SYLLABLE JWEOSS", 0x31, "Hangul"),
    c(0xC92D, None, "HANGUL SYLLABLE JWEONG", 0x31, "Hangul"),
    c(0xC92E, None, "HANGUL SYLLABLE JWEOJ", 0x31, "Hangul"),
    c(0xC92F, None, "HANGUL SYLLABLE JWEOC", 0x31, "Hangul"),
    c(0xC930, None, "HANGUL SYLLABLE JWEOK", 0x31, "Hangul"),
    c(0xC931, None, "HANGUL SYLLABLE JWEOT", 0x31, "Hangul"),
    c(0xC932, None, "HANGUL SYLLABLE JWEOP", 0x31, "Hangul"),
    c(0xC933, None, "HANGUL SYLLABLE JWEOH", 0x31, "Hangul"),
    c(0xC934, None, "HANGUL SYLLABLE JWE", 0x31, "Hangul"),
    c(0xC935, None, "HANGUL SYLLABLE JWEG", 0x31, "Hangul"),
    c(0xC936, None, "HANGUL SYLLABLE JWEGG", 0x31, "Hangul"),
    c(0xC937, None, "HANGUL SYLLABLE JWEGS", 0x31, "Hangul"),
    c(0xC938, None, "HANGUL SYLLABLE JWEN", 0x31, "Hangul"),
    c(0xC939, None, "HANGUL SYLLABLE JWENJ", 0x31, "Hangul"),
    c(0xC93A, None, "HANGUL SYLLABLE JWENH", 0x31, "Hangul"),
    c(0xC93B, None, "HANGUL SYLLABLE JWED", 0x31, "Hangul"),
    c(0xC93C, None, "HANGUL SYLLABLE JWEL", 0x31, "Hangul"),
    c(0xC93D, None, "HANGUL SYLLABLE JWELG", 0x31, "Hangul"),
    c(0xC93E, None, "HANGUL SYLLABLE JWELM", 0x31, "Hangul"),
    c(0xC93F, None, "HANGUL SYLLABLE JWELB", 0x31, "Hangul"),
    c(0xC940, None, "HANGUL SYLLABLE JWELS", 0x31, "Hangul"),
    c(0xC941, None, "HANGUL SYLLABLE JWELT", 0x31, "Hangul"),
    c(0xC942, None, "HANGUL SYLLABLE JWELP", 0x31, "Hangul"),
    c(0xC943, None, "HANGUL SYLLABLE JWELH", 0x31, "Hangul"),
    c(0xC944, None, "HANGUL SYLLABLE JWEM", 0x31, "Hangul"),
    c(0xC945, None, "HANGUL SYLLABLE JWEB", 0x31, "Hangul"),
    c(0xC946, None, "HANGUL SYLLABLE JWEBS", 0x31, "Hangul"),
    c(0xC947, None, "HANGUL SYLLABLE JWES", 0x31, "Hangul"),
    c(0xC948, None, "HANGUL SYLLABLE JWESS", 0x31, "Hangul"),
    c(0xC949, None, "HANGUL SYLLABLE JWENG", 0x31, "Hangul"),
    c(0xC94A, None, "HANGUL SYLLABLE JWEJ", 0x31, "Hangul"),
    c(0xC94B, None, "HANGUL SYLLABLE JWEC", 0x31, "Hangul"),
    c(0xC94C, None, "HANGUL SYLLABLE JWEK", 0x31, "Hangul"),
    c(0xC94D, None, "HANGUL SYLLABLE JWET", 0x31, "Hangul"),
    c(0xC94E, None, "HANGUL SYLLABLE JWEP", 0x31, "Hangul"),
    c(0xC94F, None, "HANGUL SYLLABLE JWEH", 0x31, "Hangul"),
    c(0xC950, None, "HANGUL SYLLABLE JWI", 0x31, "Hangul"),
    c(0xC951, None, "HANGUL SYLLABLE JWIG", 0x31, "Hangul"),
    c(0xC952, None, "HANGUL SYLLABLE JWIGG", 0x31, "Hangul"),
    c(0xC953, None, "HANGUL SYLLABLE JWIGS", 0x31, "Hangul"),
    c(0xC954, None, "HANGUL SYLLABLE JWIN", 0x31, "Hangul"),
    c(0xC955, None, "HANGUL SYLLABLE JWINJ", 0x31, "Hangul"),
    c(0xC956, None, "HANGUL SYLLABLE JWINH", 0x31, "Hangul"),
    c(0xC957, None, "HANGUL SYLLABLE JWID", 0x31, "Hangul"),
    c(0xC958, None, "HANGUL SYLLABLE JWIL", 0x31, "Hangul"),
    c(0xC959, None, "HANGUL SYLLABLE JWILG", 0x31, "Hangul"),
    c(0xC95A, None, "HANGUL SYLLABLE JWILM", 0x31, "Hangul"),
    c(0xC95B, None, "HANGUL SYLLABLE JWILB", 0x31, "Hangul"),
    c(0xC95C, None, "HANGUL SYLLABLE JWILS", 0x31, "Hangul"),
    c(0xC95D, None, "HANGUL SYLLABLE JWILT", 0x31, "Hangul"),
    c(0xC95E, None, "HANGUL SYLLABLE JWILP", 0x31, "Hangul"),
    c(0xC95F, None, "HANGUL SYLLABLE JWILH", 0x31, "Hangul"),
    c(0xC960, None, "HANGUL SYLLABLE JWIM", 0x31, "Hangul"),
    c(0xC961, None, "HANGUL SYLLABLE JWIB", 0x31, "Hangul"),
    c(0xC962, None, "HANGUL SYLLABLE JWIBS", 0x31, "Hangul"),
    c(0xC963, None, "HANGUL SYLLABLE JWIS", 0x31, "Hangul"),
    c(0xC964, None, "HANGUL SYLLABLE JWISS", 0x31, "Hangul"),
    c(0xC965, None, "HANGUL SYLLABLE JWING", 0x31, "Hangul"),
    c(0xC966, None, "HANGUL SYLLABLE JWIJ", 0x31, "Hangul"),
    c(0xC967, None, "HANGUL SYLLABLE JWIC", 0x31, "Hangul"),
    c(0xC968, None, "HANGUL SYLLABLE JWIK", 0x31, "Hangul"),
    c(0xC969, None, "HANGUL SYLLABLE JWIT", 0x31, "Hangul"),
    c(0xC96A, None, "HANGUL SYLLABLE JWIP", 0x31, "Hangul"),
    c(0xC96B, None, "HANGUL SYLLABLE JWIH", 0x31, "Hangul"),
    c(0xC96C, None, "HANGUL SYLLABLE JYU", 0x31, "Hangul"),
    c(0xC96D, None, "HANGUL SYLLABLE JYUG", 0x31, "Hangul"),
    c(0xC96E, None, "HANGUL SYLLABLE JYUGG", 0x31, "Hangul"),
    c(0xC96F, None, "HANGUL SYLLABLE JYUGS", 0x31, "Hangul"),
    c(0xC970, None, "HANGUL SYLLABLE JYUN", 0x31, "Hangul"),
    c(0xC971, None, "HANGUL SYLLABLE JYUNJ", 0x31, "Hangul"),
    c(0xC972, None, "HANGUL SYLLABLE JYUNH", 0x31, "Hangul"),
    c(0xC973, None, "HANGUL SYLLABLE JYUD", 0x31, "Hangul"),
    c(0xC974, None, "HANGUL SYLLABLE JYUL", 0x31, "Hangul"),
    c(0xC975, None, "HANGUL SYLLABLE JYULG", 0x31, "Hangul"),
    c(0xC976, None, "HANGUL SYLLABLE JYULM", 0x31, "Hangul"),
    c(0xC977, None, "HANGUL SYLLABLE JYULB", 0x31, "Hangul"),
    c(0xC978, None, "HANGUL SYLLABLE JYULS", 0x31, "Hangul"),
    c(0xC979, None, "HANGUL SYLLABLE JYULT", 0x31, "Hangul"),
    c(0xC97A, None, "HANGUL SYLLABLE JYULP", 0x31, "Hangul"),
    c(0xC97B, None, "HANGUL SYLLABLE JYULH", 0x31, "Hangul"),
    c(0xC97C, None, "HANGUL SYLLABLE JYUM", 0x31, "Hangul"),
    c(0xC97D, None, "HANGUL SYLLABLE JYUB", 0x31, "Hangul"),
    c(0xC97E, None, "HANGUL SYLLABLE JYUBS", 0x31, "Hangul"),
    c(0xC97F, None, "HANGUL SYLLABLE JYUS", 0x31, "Hangul"),
    c(0xC980, None, "HANGUL SYLLABLE JYUSS", 0x31, "Hangul"),
    c(0xC981, None, "HANGUL SYLLABLE JYUNG", 0x31, "Hangul"),
    c(0xC982, None, "HANGUL SYLLABLE JYUJ", 0x31, "Hangul"),
    c(0xC983, None, "HANGUL SYLLABLE JYUC", 0x31, "Hangul"),
    c(0xC984, None, "HANGUL SYLLABLE JYUK", 0x31, "Hangul"),
    c(0xC985, None, "HANGUL SYLLABLE JYUT", 0x31, "Hangul"),
    c(0xC986, None, "HANGUL SYLLABLE JYUP", 0x31, "Hangul"),
    c(0xC987, None, "HANGUL SYLLABLE JYUH", 0x31, "Hangul"),
    c(0xC988, None, "HANGUL SYLLABLE JEU", 0x31, "Hangul"),
    c(0xC989, None, "HANGUL SYLLABLE JEUG", 0x31, "Hangul"),
    c(0xC98A, None, "HANGUL SYLLABLE JEUGG", 0x31, "Hangul"),
    c(0xC98B, None, "HANGUL SYLLABLE JEUGS", 0x31, "Hangul"),
    c(0xC98C, None, "HANGUL SYLLABLE JEUN", 0x31, "Hangul"),
    c(0xC98D, None, "HANGUL SYLLABLE JEUNJ", 0x31, "Hangul"),
    c(0xC98E, None, "HANGUL SYLLABLE JEUNH", 0x31, "Hangul"),
    c(0xC98F, None, "HANGUL SYLLABLE JEUD", 0x31, "Hangul"),
    c(0xC990, None, "HANGUL SYLLABLE JEUL", 0x31, "Hangul"),
    c(0xC991, None, "HANGUL SYLLABLE JEULG", 0x31, "Hangul"),
    c(0xC992, None, "HANGUL SYLLABLE JEULM", 0x31, "Hangul"),
    c(0xC993, None, "HANGUL SYLLABLE JEULB", 0x31, "Hangul"),
    c(0xC994, None, "HANGUL SYLLABLE JEULS", 0x31, "Hangul"),
    c(0xC995, None, "HANGUL SYLLABLE JEULT", 0x31, "Hangul"),
    c(0xC996, None, "HANGUL SYLLABLE JEULP", 0x31, "Hangul"),
    c(0xC997, None, "HANGUL SYLLABLE JEULH", 0x31, "Hangul"),
    c(0xC998, None, "HANGUL SYLLABLE JEUM", 0x31, "Hangul"),
    c(0xC999, None, "HANGUL SYLLABLE JEUB", 0x31, "Hangul"),
    c(0xC99A, None, "HANGUL SYLLABLE JEUBS", 0x31, "Hangul"),
    c(0xC99B, None, "HANGUL SYLLABLE JEUS", 0x31, "Hangul"),
    c(0xC99C, None, "HANGUL SYLLABLE JEUSS", 0x31, "Hangul"),
    c(0xC99D, None, "HANGUL SYLLABLE JEUNG", 0x31, "Hangul"),
    c(0xC99E, None, "HANGUL SYLLABLE JEUJ", 0x31, "Hangul"),
    c(0xC99F, None, "HANGUL SYLLABLE JEUC", 0x31, "Hangul"),
    c(0xC9A0, None, "HANGUL SYLLABLE JEUK", 0x31, "Hangul"),
    c(0xC9A1, None, "HANGUL SYLLABLE JEUT", 0x31, "Hangul"),
    c(0xC9A2, None, "HANGUL SYLLABLE JEUP", 0x31, "Hangul"),
    c(0xC9A3, None, "HANGUL SYLLABLE JEUH", 0x31, "Hangul"),
    c(0xC9A4, None, "HANGUL SYLLABLE JYI", 0x31, "Hangul"),
    c(0xC9A5, None, "HANGUL SYLLABLE JYIG", 0x31, "Hangul"),
    c(0xC9A6, None, "HANGUL SYLLABLE JYIGG", 0x31, "Hangul"),
    c(0xC9A7, None, "HANGUL SYLLABLE JYIGS", 0x31, "Hangul"),
    c(0xC9A8, None, "HANGUL SYLLABLE JYIN", 0x31, "Hangul"),
    c(0xC9A9, None, "HANGUL SYLLABLE JYINJ", 0x31, "Hangul"),
    c(0xC9AA, None, "HANGUL SYLLABLE JYINH", 0x31, "Hangul"),
    c(0xC9AB, None, "HANGUL SYLLABLE JYID", 0x31, "Hangul"),
    c(0xC9AC, None, "HANGUL SYLLABLE JYIL", 0x31, "Hangul"),
    c(0xC9AD, None, "HANGUL SYLLABLE JYILG", 0x31, "Hangul"),
    c(0xC9AE, None, "HANGUL SYLLABLE JYILM", 0x31, "Hangul"),
    c(0xC9AF, None, "HANGUL SYLLABLE JYILB", 0x31, "Hangul"),
    c(0xC9B0, None, "HANGUL SYLLABLE JYILS", 0x31, "Hangul"),
    c(0xC9B1, None, "HANGUL SYLLABLE JYILT", 0x31, "Hangul"),
    c(0xC9B2, None, "HANGUL SYLLABLE JYILP", 0x31, "Hangul"),
    c(0xC9B3, None, "HANGUL SYLLABLE JYILH", 0x31, "Hangul"),
    c(0xC9B4, None, "HANGUL SYLLABLE JYIM", 0x31, "Hangul"),
    c(0xC9B5, None, "HANGUL SYLLABLE JYIB", 0x31, "Hangul"),
    c(0xC9B6, None, "HANGUL SYLLABLE JYIBS", 0x31, "Hangul"),
    c(0xC9B7, None, "HANGUL SYLLABLE JYIS", 0x31, "Hangul"),
    c(0xC9B8, None, "HANGUL SYLLABLE JYISS", 0x31, "Hangul"),
    c(0xC9B9, None, "HANGUL SYLLABLE JYING", 0x31, "Hangul"),
    c(0xC9BA, None, "HANGUL SYLLABLE JYIJ", 0x31, "Hangul"),
    c(0xC9BB, None, "HANGUL SYLLABLE JYIC", 0x31, "Hangul"),
    c(0xC9BC, None, "HANGUL SYLLABLE JYIK", 0x31, "Hangul"),
    c(0xC9BD, None, "HANGUL SYLLABLE JYIT", 0x31, "Hangul"),
    c(0xC9BE, None, "HANGUL SYLLABLE JYIP", 0x31, "Hangul"),
    c(0xC9BF, None, "HANGUL SYLLABLE JYIH", 0x31, "Hangul"),
    c(0xC9C0, None, "HANGUL SYLLABLE JI", 0x31, "Hangul"),
    c(0xC9C1, None, "HANGUL SYLLABLE JIG", 0x31, "Hangul"),
    c(0xC9C2, None, "HANGUL SYLLABLE JIGG", 0x31, "Hangul"),
    c(0xC9C3, None, "HANGUL SYLLABLE JIGS", 0x31, "Hangul"),
    c(0xC9C4, None, "HANGUL SYLLABLE JIN", 0x31, "Hangul"),
    c(0xC9C5, None, "HANGUL SYLLABLE JINJ", 0x31, "Hangul"),
    c(0xC9C6, None, "HANGUL SYLLABLE JINH", 0x31, "Hangul"),
    c(0xC9C7, None, "HANGUL SYLLABLE JID", 0x31, "Hangul"),
    c(0xC9C8, None, "HANGUL SYLLABLE JIL", 0x31, "Hangul"),
    c(0xC9C9, None, "HANGUL SYLLABLE JILG", 0x31, "Hangul"),
    c(0xC9CA, None, "HANGUL SYLLABLE JILM", 0x31, "Hangul"),
    c(0xC9CB, None, "HANGUL SYLLABLE JILB", 0x31, "Hangul"),
    c(0xC9CC, None, "HANGUL SYLLABLE JILS", 0x31, "Hangul"),
    c(0xC9CD, None, "HANGUL SYLLABLE JILT", 0x31, "Hangul"),
    c(0xC9CE, None, "HANGUL SYLLABLE JILP", 0x31, "Hangul"),
    c(0xC9CF, None, "HANGUL SYLLABLE JILH", 0x31, "Hangul"),
    c(0xC9D0, None, "HANGUL SYLLABLE JIM", 0x31, "Hangul"),
    c(0xC9D1, None, "HANGUL SYLLABLE JIB", 0x31, "Hangul"),
    c(0xC9D2, None, "HANGUL SYLLABLE JIBS", 0x31, "Hangul"),
    c(0xC9D3, None, "HANGUL SYLLABLE JIS", 0x31, "Hangul"),
    c(0xC9D4, None, "HANGUL SYLLABLE JISS", 0x31, "Hangul"),
    c(0xC9D5, None, "HANGUL SYLLABLE JING", 0x31, "Hangul"),
    c(0xC9D6, None, "HANGUL SYLLABLE JIJ", 0x31, "Hangul"),
    c(0xC9D7, None, "HANGUL SYLLABLE JIC", 0x31, "Hangul"),
    c(0xC9D8, None, "HANGUL SYLLABLE JIK", 0x31, "Hangul"),
    c(0xC9D9, None, "HANGUL SYLLABLE JIT", 0x31, "Hangul"),
    c(0xC9DA, None, "HANGUL SYLLABLE JIP", 0x31, "Hangul"),
    c(0xC9DB, None, "HANGUL SYLLABLE JIH", 0x31, "Hangul"),
    c(0xC9DC, None, "HANGUL SYLLABLE JJA", 0x31, "Hangul"),
    c(0xC9DD, None, "HANGUL SYLLABLE JJAG", 0x31, "Hangul"),
    c(0xC9DE, None, "HANGUL SYLLABLE JJAGG", 0x31, "Hangul"),
    c(0xC9DF, None, "HANGUL SYLLABLE JJAGS", 0x31, "Hangul"),
    c(0xC9E0, None, "HANGUL SYLLABLE JJAN", 0x31, "Hangul"),
    c(0xC9E1, None, "HANGUL SYLLABLE JJANJ", 0x31, "Hangul"),
    c(0xC9E2, None, "HANGUL SYLLABLE JJANH", 0x31, "Hangul"),
    c(0xC9E3, None, "HANGUL SYLLABLE JJAD", 0x31, "Hangul"),
    c(0xC9E4, None, "HANGUL SYLLABLE JJAL", 0x31, "Hangul"),
    c(0xC9E5, None, "HANGUL SYLLABLE JJALG", 0x31, "Hangul"),
    c(0xC9E6, None, "HANGUL SYLLABLE JJALM", 0x31, "Hangul"),
    c(0xC9E7, None, "HANGUL SYLLABLE JJALB", 0x31, "Hangul"),
    c(0xC9E8, None, "HANGUL SYLLABLE JJALS", 0x31, "Hangul"),
    c(0xC9E9, None, "HANGUL SYLLABLE JJALT", 0x31, "Hangul"),
    c(0xC9EA, None, "HANGUL SYLLABLE JJALP", 0x31, "Hangul"),
    c(0xC9EB, None, "HANGUL SYLLABLE JJALH", 0x31, "Hangul"),
    c(0xC9EC, None, "HANGUL SYLLABLE JJAM", 0x31, "Hangul"),
    c(0xC9ED, None, "HANGUL SYLLABLE JJAB", 0x31, "Hangul"),
    c(0xC9EE, None, "HANGUL SYLLABLE JJABS", 0x31, "Hangul"),
    c(0xC9EF, None, "HANGUL SYLLABLE JJAS", 0x31, "Hangul"),
    c(0xC9F0, None, "HANGUL SYLLABLE JJASS", 0x31, "Hangul"),
    c(0xC9F1, None, "HANGUL SYLLABLE JJANG", 0x31, "Hangul"),
    c(0xC9F2, None, "HANGUL SYLLABLE JJAJ", 0x31, "Hangul"),
    c(0xC9F3, None, "HANGUL SYLLABLE JJAC", 0x31, "Hangul"),
    c(0xC9F4, None, "HANGUL SYLLABLE JJAK", 0x31, "Hangul"),
    c(0xC9F5, None, "HANGUL SYLLABLE JJAT", 0x31, "Hangul"),
    c(0xC9F6, None, "HANGUL SYLLABLE JJAP", 0x31, "Hangul"),
    c(0xC9F7, None, "HANGUL SYLLABLE JJAH", 0x31, "Hangul"),
    c(0xC9F8, None, "HANGUL SYLLABLE JJAE", 0x31, "Hangul"),
    c(0xC9F9, None, "HANGUL SYLLABLE JJAEG", 0x31, "Hangul"),
    c(0xC9FA, None, "HANGUL SYLLABLE JJAEGG", 0x31, "Hangul"),
    c(0xC9FB, None, "HANGUL SYLLABLE JJAEGS", 0x31, "Hangul"),
    c(0xC9FC, None, "HANGUL SYLLABLE JJAEN", 0x31, "Hangul"),
    c(0xC9FD, None, "HANGUL SYLLABLE JJAENJ", 0x31, "Hangul"),
    c(0xC9FE, None, "HANGUL SYLLABLE JJAENH", 0x31, "Hangul"),
    c(0xC9FF, None, "HANGUL SYLLABLE JJAED", 0x31, "Hangul"),
    c(0xCA00, None, "HANGUL SYLLABLE JJAEL", 0x31, "Hangul"),
    c(0xCA01, None, "HANGUL SYLLABLE JJAELG", 0x31, "Hangul"),
    c(0xCA02, None, "HANGUL SYLLABLE JJAELM", 0x31, "Hangul"),
    c(0xCA03, None, "HANGUL SYLLABLE JJAELB", 0x31, "Hangul"),
    c(0xCA04, None, "HANGUL SYLLABLE JJAELS", 0x31, "Hangul"),
    c(0xCA05, None, "HANGUL SYLLABLE JJAELT", 0x31, "Hangul"),
    c(0xCA06, None, "HANGUL SYLLABLE JJAELP", 0x31, "Hangul"),
    c(0xCA07, None, "HANGUL SYLLABLE JJAELH", 0x31, "Hangul"),
    c(0xCA08, None, "HANGUL SYLLABLE JJAEM", 0x31, "Hangul"),
    c(0xCA09, None, "HANGUL SYLLABLE JJAEB", 0x31, "Hangul"),
    c(0xCA0A, None, "HANGUL SYLLABLE JJAEBS", 0x31, "Hangul"),
    c(0xCA0B, None, "HANGUL SYLLABLE JJAES", 0x31, "Hangul"),
    c(0xCA0C, None, "HANGUL SYLLABLE JJAESS", 0x31, "Hangul"),
    c(0xCA0D, None, "HANGUL SYLLABLE JJAENG", 0x31, "Hangul"),
    c(0xCA0E, None, "HANGUL SYLLABLE JJAEJ", 0x31, "Hangul"),
    c(0xCA0F, None, "HANGUL SYLLABLE JJAEC", 0x31, "Hangul"),
    c(0xCA10, None, "HANGUL SYLLABLE JJAEK", 0x31, "Hangul"),
    c(0xCA11, None, "HANGUL SYLLABLE JJAET", 0x31, "Hangul"),
    c(0xCA12, None, "HANGUL SYLLABLE JJAEP", 0x31, "Hangul"),
    c(0xCA13, None, "HANGUL SYLLABLE JJAEH", 0x31, "Hangul"),
    c(0xCA14, None, "HANGUL SYLLABLE JJYA", 0x31, "Hangul"),
    c(0xCA15, None, "HANGUL SYLLABLE JJYAG", 0x31, "Hangul"),
    c(0xCA16, None, "HANGUL SYLLABLE JJYAGG", 0x31, "Hangul"),
    c(0xCA17, None, "HANGUL SYLLABLE JJYAGS", 0x31, "Hangul"),
    c(0xCA18, None, "HANGUL SYLLABLE JJYAN", 0x31, "Hangul"),
    c(0xCA19, None, "HANGUL SYLLABLE JJYANJ", 0x31, "Hangul"),
    c(0xCA1A, None, "HANGUL SYLLABLE JJYANH", 0x31, "Hangul"),
    c(0xCA1B, None, "HANGUL SYLLABLE JJYAD", 0x31, "Hangul"),
    c(0xCA1C, None, "HANGUL SYLLABLE JJYAL", 0x31, "Hangul"),
    c(0xCA1D, None, "HANGUL SYLLABLE JJYALG", 0x31, "Hangul"),
    c(0xCA1E, None, "HANGUL SYLLABLE JJYALM", 0x31, "Hangul"),
    c(0xCA1F, None, "HANGUL SYLLABLE JJYALB", 0x31, "Hangul"),
    c(0xCA20, None, "HANGUL SYLLABLE JJYALS", 0x31, "Hangul"),
    c(0xCA21, None, "HANGUL SYLLABLE JJYALT", 0x31, "Hangul"),
    c(0xCA22, None, "HANGUL SYLLABLE JJYALP", 0x31, "Hangul"),
    c(0xCA23, None, "HANGUL SYLLABLE JJYALH", 0x31, "Hangul"),
    c(0xCA24, None, "HANGUL SYLLABLE JJYAM", 0x31, "Hangul"),
    c(0xCA25, None, "HANGUL SYLLABLE JJYAB", 0x31, "Hangul"),
    c(0xCA26, None, "HANGUL SYLLABLE JJYABS", 0x31, "Hangul"),
    c(0xCA27, None, "HANGUL SYLLABLE JJYAS", 0x31, "Hangul"),
    c(0xCA28, None, "HANGUL SYLLABLE JJYASS", 0x31, "Hangul"),
    c(0xCA29, None, "HANGUL SYLLABLE JJYANG", 0x31, "Hangul"),
    c(0xCA2A, None, "HANGUL SYLLABLE JJYAJ", 0x31, "Hangul"),
    c(0xCA2B, None, "HANGUL SYLLABLE JJYAC", 0x31, "Hangul"),
    c(0xCA2C, None, "HANGUL SYLLABLE JJYAK", 0x31, "Hangul"),
    c(0xCA2D, None, "HANGUL SYLLABLE JJYAT", 0x31, "Hangul"),
    c(0xCA2E, None, "HANGUL SYLLABLE JJYAP", 0x31, "Hangul"),
    c(0xCA2F, None, "HANGUL SYLLABLE JJYAH", 0x31, "Hangul"),
    c(0xCA30, None, "HANGUL SYLLABLE JJYAE", 0x31, "Hangul"),
    c(0xCA31, None, "HANGUL SYLLABLE JJYAEG", 0x31, "Hangul"),
    c(0xCA32, None, "HANGUL SYLLABLE JJYAEGG", 0x31, "Hangul"),
    c(0xCA33, None, "HANGUL SYLLABLE JJYAEGS", 0x31, "Hangul"),
    c(0xCA34, None, "HANGUL SYLLABLE JJYAEN", 0x31, "Hangul"),
    c(0xCA35, None, "HANGUL SYLLABLE JJYAENJ", 0x31, "Hangul"),
    c(0xCA36, None, "HANGUL SYLLABLE JJYAENH", 0x31, "Hangul"),
    c(0xCA37, None, "HANGUL SYLLABLE JJYAED", 0x31, "Hangul"),
    c(0xCA38, None, "HANGUL SYLLABLE JJYAEL", 0x31, "Hangul"),
    c(0xCA39, None, "HANGUL SYLLABLE JJYAELG", 0x31, "Hangul"),
    c(0xCA3A, None, "HANGUL SYLLABLE JJYAELM", 0x31, "Hangul"),
    c(0xCA3B, None, "HANGUL SYLLABLE JJYAELB", 0x31, "Hangul"),
    c(0xCA3C, None, "HANGUL SYLLABLE JJYAELS", 0x31, "Hangul"),
    c(0xCA3D, None, "HANGUL SYLLABLE JJYAELT", 0x31, "Hangul"),
    c(0xCA3E, None, "HANGUL SYLLABLE JJYAELP", 0x31, "Hangul"),
    c(0xCA3F, None, "HANGUL SYLLABLE JJYAELH", 0x31, "Hangul"),
    c(0xCA40, None, "HANGUL SYLLABLE JJYAEM", 0x31, "Hangul"),
    c(0xCA41, None, "HANGUL SYLLABLE JJYAEB", 0x31, "Hangul"),
    c(0xCA42, None, "HANGUL SYLLABLE JJYAEBS", 0x31, "Hangul"),
    c(0xCA43, None, "HANGUL SYLLABLE JJYAES", 0x31, "Hangul"),
    c(0xCA44, None, "HANGUL SYLLABLE JJYAESS", 0x31, "Hangul"),
    c(0xCA45, None, "HANGUL SYLLABLE JJYAENG", 0x31, "Hangul"),
    c(0xCA46, None, "HANGUL SYLLABLE JJYAEJ", 0x31, "Hangul"),
    c(0xCA47, None, "HANGUL SYLLABLE JJYAEC", 0x31, "Hangul"),
    c(0xCA48, None, "HANGUL SYLLABLE JJYAEK", 0x31, "Hangul"),
    c(0xCA49, None, "HANGUL SYLLABLE JJYAET", 0x31, "Hangul"),
    c(0xCA4A, None, "HANGUL SYLLABLE JJYAEP", 0x31, "Hangul"),
    c(0xCA4B, None, "HANGUL SYLLABLE JJYAEH", 0x31, "Hangul"),
    c(0xCA4C, None, "HANGUL SYLLABLE JJEO", 0x31, "Hangul"),
    c(0xCA4D, None, "HANGUL SYLLABLE JJEOG", 0x31, "Hangul"),
    c(0xCA4E, None, "HANGUL SYLLABLE JJEOGG", 0x31, "Hangul"),
    c(0xCA4F, None, "HANGUL SYLLABLE JJEOGS", 0x31, "Hangul"),
    c(0xCA50, None, "HANGUL SYLLABLE JJEON", 0x31, "Hangul"),
    c(0xCA51, None, "HANGUL SYLLABLE JJEONJ", 0x31, "Hangul"),
    c(0xCA52, None, "HANGUL SYLLABLE JJEONH", 0x31, "Hangul"),
    c(0xCA53, None, "HANGUL SYLLABLE JJEOD", 0x31, "Hangul"),
    c(0xCA54, None, "HANGUL SYLLABLE JJEOL", 0x31, "Hangul"),
    c(0xCA55, None, "HANGUL SYLLABLE JJEOLG", 0x31, "Hangul"),
    c(0xCA56, None, "HANGUL SYLLABLE JJEOLM", 0x31, "Hangul"),
    c(0xCA57, None, "HANGUL SYLLABLE JJEOLB", 0x31, "Hangul"),
    c(0xCA58, None, "HANGUL SYLLABLE JJEOLS", 0x31, "Hangul"),
    c(0xCA59, None, "HANGUL SYLLABLE JJEOLT", 0x31, "Hangul"),
    c(0xCA5A, None, "HANGUL SYLLABLE JJEOLP", 0x31, "Hangul"),
    c(0xCA5B, None, "HANGUL SYLLABLE JJEOLH", 0x31, "Hangul"),
    c(0xCA5C, None, "HANGUL SYLLABLE JJEOM", 0x31, "Hangul"),
    c(0xCA5D, None, "HANGUL SYLLABLE JJEOB", 0x31, "Hangul"),
    c(0xCA5E, None, "HANGUL SYLLABLE JJEOBS", 0x31, "Hangul"),
    c(0xCA5F, None, "HANGUL SYLLABLE JJEOS", 0x31, "Hangul"),
    c(0xCA60, None, "HANGUL SYLLABLE JJEOSS", 0x31, "Hangul"),
    c(0xCA61, None, "HANGUL SYLLABLE JJEONG", 0x31, "Hangul"),
    c(0xCA62, None, "HANGUL SYLLABLE JJEOJ", 0x31, "Hangul"),
    c(0xCA63, None, "HANGUL SYLLABLE JJEOC", 0x31, "Hangul"),
    c(0xCA64, None, "HANGUL SYLLABLE JJEOK", 0x31, "Hangul"),
    c(0xCA65, None, "HANGUL SYLLABLE JJEOT", 0x31, "Hangul"),
    c(0xCA66, None, "HANGUL SYLLABLE JJEOP", 0x31, "Hangul"),
    c(0xCA67, None, "HANGUL SYLLABLE JJEOH", 0x31, "Hangul"),
    c(0xCA68, None, "HANGUL SYLLABLE JJE", 0x31, "Hangul"),
    c(0xCA69, None, "HANGUL SYLLABLE JJEG", 0x31, "Hangul"),
    c(0xCA6A, None, "HANGUL SYLLABLE JJEGG", 0x31, "Hangul"),
    c(0xCA6B, None, "HANGUL SYLLABLE JJEGS", 0x31, "Hangul"),
    c(0xCA6C, None, "HANGUL SYLLABLE JJEN", 0x31, "Hangul"),
    c(0xCA6D, None, "HANGUL SYLLABLE JJENJ", 0x31, "Hangul"),
    c(0xCA6E, None, "HANGUL SYLLABLE JJENH", 0x31, "Hangul"),
    c(0xCA6F, None, "HANGUL SYLLABLE JJED", 0x31, "Hangul"),
    c(0xCA70, None, "HANGUL SYLLABLE JJEL", 0x31, "Hangul"),
    c(0xCA71, None, "HANGUL SYLLABLE JJELG", 0x31, "Hangul"),
    c(0xCA72, None, "HANGUL SYLLABLE JJELM", 0x31, "Hangul"),
    c(0xCA73, None, "HANGUL SYLLABLE JJELB", 0x31, "Hangul"),
    c(0xCA74, None, "HANGUL SYLLABLE JJELS", 0x31, "Hangul"),
    c(0xCA75, None, "HANGUL SYLLABLE JJELT", 0x31, "Hangul"),
    c(0xCA76, None, "HANGUL SYLLABLE JJELP", 0x31, "Hangul"),
    c(0xCA77, None, "HANGUL SYLLABLE JJELH", 0x31, "Hangul"),
    c(0xCA78, None, "HANGUL SYLLABLE JJEM", 0x31, "Hangul"),
    c(0xCA79, None, "HANGUL SYLLABLE JJEB", 0x31, "Hangul"),
    c(0xCA7A, None, "HANGUL SYLLABLE JJEBS", 0x31, "Hangul"),
    c(0xCA7B, None, "HANGUL SYLLABLE JJES", 0x31, "Hangul"),
    c(0xCA7C, None, "HANGUL SYLLABLE JJESS", 0x31, "Hangul"),
    c(0xCA7D, None, "HANGUL SYLLABLE JJENG", 0x31, "Hangul"),
    c(0xCA7E, None, "HANGUL SYLLABLE JJEJ", 0x31, "Hangul"),
    c(0xCA7F, None, "HANGUL SYLLABLE JJEC", 0x31, "Hangul"),
    c(0xCA80, None, "HANGUL SYLLABLE JJEK", 0x31, "Hangul"),
    c(0xCA81, None, "HANGUL SYLLABLE JJET", 0x31, "Hangul"),
    c(0xCA82, None, "HANGUL SYLLABLE JJEP", 0x31, "Hangul"),
    c(0xCA83, None, "HANGUL SYLLABLE JJEH", 0x31, "Hangul"),
    c(0xCA84, None, "HANGUL SYLLABLE JJYEO", 0x31, "Hangul"),
    c(0xCA85, None, "HANGUL SYLLABLE JJYEOG", 0x31, "Hangul"),
    c(0xCA86, None, "HANGUL SYLLABLE JJYEOGG", 0x31, "Hangul"),
    c(0xCA87, None, "HANGUL SYLLABLE JJYEOGS", 0x31, "Hangul"),
    c(0xCA88, None, "HANGUL SYLLABLE JJYEON", 0x31, "Hangul"),
    c(0xCA89, None, "HANGUL SYLLABLE JJYEONJ", 0x31, "Hangul"),
    c(0xCA8A, None, "HANGUL SYLLABLE JJYEONH", 0x31, "Hangul"),
    c(0xCA8B, None, "HANGUL SYLLABLE JJYEOD", 0x31, "Hangul"),
    c(0xCA8C, None, "HANGUL SYLLABLE JJYEOL", 0x31, "Hangul"),
    c(0xCA8D, None, "HANGUL SYLLABLE JJYEOLG", 0x31, "Hangul"),
    c(0xCA8E, None, "HANGUL SYLLABLE JJYEOLM", 0x31, "Hangul"),
    c(0xCA8F, None, "HANGUL SYLLABLE JJYEOLB", 0x31, "Hangul"),
    c(0xCA90, None, "HANGUL SYLLABLE JJYEOLS", 0x31, "Hangul"),
    c(0xCA91, None, "HANGUL SYLLABLE JJYEOLT", 0x31, "Hangul"),
    c(0xCA92, None, "HANGUL SYLLABLE JJYEOLP", 0x31, "Hangul"),
    c(0xCA93, None, "HANGUL SYLLABLE JJYEOLH", 0x31, "Hangul"),
    c(0xCA94, None, "HANGUL SYLLABLE JJYEOM", 0x31, "Hangul"),
    c(0xCA95, None, "HANGUL SYLLABLE JJYEOB", 0x31, "Hangul"),
    c(0xCA96, None, "HANGUL SYLLABLE JJYEOBS", 0x31, "Hangul"),
    c(0xCA97, None, "HANGUL SYLLABLE JJYEOS", 0x31, "Hangul"),
    c(0xCA98, None, "HANGUL SYLLABLE JJYEOSS", 0x31, "Hangul"),
    c(0xCA99, None, "HANGUL SYLLABLE JJYEONG", 0x31, "Hangul"),
    c(0xCA9A, None, "HANGUL SYLLABLE JJYEOJ", 0x31, "Hangul"),
    c(0xCA9B, None, "HANGUL SYLLABLE JJYEOC", 0x31, "Hangul"),
    c(0xCA9C, None, "HANGUL SYLLABLE JJYEOK", 0x31, "Hangul"),
    c(0xCA9D, None, "HANGUL SYLLABLE JJYEOT", 0x31, "Hangul"),
    c(0xCA9E, None, "HANGUL SYLLABLE JJYEOP", 0x31, "Hangul"),
    c(0xCA9F, None, "HANGUL SYLLABLE JJYEOH", 0x31, "Hangul"),
    c(0xCAA0, None, "HANGUL SYLLABLE JJYE", 0x31, "Hangul"),
    c(0xCAA1, None, "HANGUL SYLLABLE JJYEG", 0x31, "Hangul"),
    c(0xCAA2, None, "HANGUL SYLLABLE JJYEGG", 0x31, "Hangul"),
    c(0xCAA3, None, "HANGUL SYLLABLE JJYEGS", 0x31, "Hangul"),
    c(0xCAA4, None, "HANGUL SYLLABLE JJYEN", 0x31, "Hangul"),
    c(0xCAA5, None, "HANGUL SYLLABLE JJYENJ", 0x31, "Hangul"),
    c(0xCAA6, None, "HANGUL SYLLABLE JJYENH", 0x31, "Hangul"),
    c(0xCAA7, None, "HANGUL SYLLABLE JJYED", 0x31, "Hangul"),
    c(0xCAA8, None, "HANGUL SYLLABLE JJYEL", 0x31, "Hangul"),
    c(0xCAA9, None, "HANGUL SYLLABLE JJYELG", 0x31, "Hangul"),
    c(0xCAAA, None, "HANGUL SYLLABLE JJYELM", 0x31, "Hangul"),
    c(0xCAAB, None, "HANGUL SYLLABLE JJYELB", 0x31, "Hangul"),
    c(0xCAAC, None, "HANGUL SYLLABLE JJYELS", 0x31, "Hangul"),
    c(0xCAAD, None, "HANGUL SYLLABLE JJYELT", 0x31, "Hangul"),
    c(0xCAAE, None, "HANGUL SYLLABLE JJYELP", 0x31, "Hangul"),
    c(0xCAAF, None, "HANGUL SYLLABLE JJYELH", 0x31, "Hangul"),
    c(0xCAB0, None, "HANGUL SYLLABLE JJYEM", 0x31, "Hangul"),
    c(0xCAB1, None, "HANGUL SYLLABLE JJYEB", 0x31, "Hangul"),
    c(0xCAB2, None, "HANGUL SYLLABLE JJYEBS", 0x31, "Hangul"),
    c(0xCAB3, None, "HANGUL SYLLABLE JJYES", 0x31, "Hangul"),
    c(0xCAB4, None, "HANGUL SYLLABLE JJYESS", 0x31, "Hangul"),
    c(0xCAB5, None, "HANGUL SYLLABLE JJYENG", 0x31, "Hangul"),
    c(0xCAB6, None, "HANGUL SYLLABLE JJYEJ", 0x31, "Hangul"),
    c(0xCAB7, None, "HANGUL SYLLABLE JJYEC", 0x31, "Hangul"),
    c(0xCAB8, None, "HANGUL SYLLABLE JJYEK", 0x31, "Hangul"),
    c(0xCAB9, None, "HANGUL SYLLABLE JJYET", 0x31, "Hangul"),
    c(0xCABA, None, "HANGUL SYLLABLE JJYEP", 0x31, "Hangul"),
    c(0xCABB, None, "HANGUL SYLLABLE JJYEH", 0x31, "Hangul"),
    c(0xCABC, None, "HANGUL SYLLABLE JJO", 0x31, "Hangul"),
    c(0xCABD, None, "HANGUL SYLLABLE JJOG", 0x31, "Hangul"),
    c(0xCABE, None, "HANGUL SYLLABLE JJOGG", 0x31, "Hangul"),
    c(0xCABF, None, "HANGUL SYLLABLE JJOGS", 0x31, "Hangul"),
    c(0xCAC0, None, "HANGUL SYLLABLE JJON", 0x31, "Hangul"),
    c(0xCAC1, None, "HANGUL SYLLABLE JJONJ", 0x31, "Hangul"),
    c(0xCAC2, None, "HANGUL SYLLABLE JJONH", 0x31, "Hangul"),
    c(0xCAC3, None, "HANGUL SYLLABLE JJOD", 0x31, "Hangul"),
    c(0xCAC4, None, "HANGUL SYLLABLE JJOL", 0x31, "Hangul"),
    c(0xCAC5, None, "HANGUL SYLLABLE JJOLG", 0x31, "Hangul"),
    c(0xCAC6, None, "HANGUL SYLLABLE JJOLM", 0x31, "Hangul"),
    c(0xCAC7, None, "HANGUL SYLLABLE JJOLB", 0x31, "Hangul"),
    c(0xCAC8, None, "HANGUL SYLLABLE JJOLS", 0x31, "Hangul"),
    c(0xCAC9, None, "HANGUL SYLLABLE JJOLT", 0x31, "Hangul"),
    c(0xCACA, None, "HANGUL SYLLABLE JJOLP", 0x31, "Hangul"),
    c(0xCACB, None, "HANGUL SYLLABLE JJOLH", 0x31, "Hangul"),
    c(0xCACC, None, "HANGUL SYLLABLE JJOM", 0x31, "Hangul"),
    c(0xCACD, None, "HANGUL SYLLABLE JJOB", 0x31, "Hangul"),
    c(0xCACE, None, "HANGUL SYLLABLE JJOBS", 0x31, "Hangul"),
    c(0xCACF, None, "HANGUL SYLLABLE JJOS", 0x31, "Hangul"),
    c(0xCAD0, None, "HANGUL SYLLABLE JJOSS", 0x31, "Hangul"),
    c(0xCAD1, None, "HANGUL SYLLABLE JJONG", 0x31, "Hangul"),
    c(0xCAD2, None, "HANGUL SYLLABLE JJOJ", 0x31, "Hangul"),
    c(0xCAD3, None, "HANGUL SYLLABLE JJOC", 0x31, "Hangul"),
    c(0xCAD4, None, "HANGUL SYLLABLE JJOK", 0x31, "Hangul"),
    c(0xCAD5, None, "HANGUL SYLLABLE JJOT", 0x31, "Hangul"),
    c(0xCAD6, None, "HANGUL SYLLABLE JJOP", 0x31, "Hangul"),
    c(0xCAD7, None, "HANGUL SYLLABLE JJOH", 0x31, "Hangul"),
    c(0xCAD8, None, "HANGUL SYLLABLE JJWA", 0x31, "Hangul"),
    c(0xCAD9, None, "HANGUL SYLLABLE JJWAG", 0x31, "Hangul"),
    c(0xCADA, None, "HANGUL SYLLABLE JJWAGG", 0x31, "Hangul"),
    c(0xCADB, None, "HANGUL SYLLABLE JJWAGS", 0x31, "Hangul"),
    c(0xCADC, None, "HANGUL SYLLABLE JJWAN", 0x31, "Hangul"),
    c(0xCADD, None, "HANGUL SYLLABLE JJWANJ", 0x31, "Hangul"),
    c(0xCADE, None, "HANGUL SYLLABLE JJWANH", 0x31, "Hangul"),
    c(0xCADF, None, "HANGUL SYLLABLE JJWAD", 0x31, "Hangul"),
    c(0xCAE0, None, "HANGUL SYLLABLE JJWAL", 0x31, "Hangul"),
    c(0xCAE1, None, "HANGUL SYLLABLE JJWALG", 0x31, "Hangul"),
    c(0xCAE2, None, "HANGUL SYLLABLE JJWALM", 0x31, "Hangul"),
    c(0xCAE3, None, "HANGUL SYLLABLE JJWALB", 0x31, "Hangul"),
    c(0xCAE4, None, "HANGUL SYLLABLE JJWALS", 0x31, "Hangul"),
    c(0xCAE5, None, "HANGUL SYLLABLE JJWALT", 0x31, "Hangul"),
    c(0xCAE6, None, "HANGUL SYLLABLE JJWALP", 0x31, "Hangul"),
    c(0xCAE7, None, "HANGUL SYLLABLE JJWALH", 0x31, "Hangul"),
    c(0xCAE8, None, "HANGUL SYLLABLE JJWAM", 0x31, "Hangul"),
    c(0xCAE9, None, "HANGUL SYLLABLE JJWAB", 0x31, "Hangul"),
    c(0xCAEA, None, "HANGUL SYLLABLE JJWABS", 0x31, "Hangul"),
    c(0xCAEB, None, "HANGUL SYLLABLE JJWAS", 0x31, "Hangul"),
    c(0xCAEC, None, "HANGUL SYLLABLE JJWASS", 0x31, "Hangul"),
    c(0xCAED, None, "HANGUL SYLLABLE JJWANG", 0x31, "Hangul"),
    c(0xCAEE, None, "HANGUL SYLLABLE JJWAJ", 0x31, "Hangul"),
    c(0xCAEF, None, "HANGUL SYLLABLE JJWAC", 0x31, "Hangul"),
    c(0xCAF0, None, "HANGUL SYLLABLE JJWAK", 0x31, "Hangul"),
    c(0xCAF1, None, "HANGUL SYLLABLE JJWAT", 0x31, "Hangul"),
    c(0xCAF2, None, "HANGUL SYLLABLE JJWAP", 0x31, "Hangul"),
    c(0xCAF3, None, "HANGUL SYLLABLE JJWAH", 0x31, "Hangul"),
    c(0xCAF4, None, "HANGUL SYLLABLE JJWAE", 0x31, "Hangul"),
    c(0xCAF5, None, "HANGUL SYLLABLE JJWAEG", 0x31, "Hangul"),
    c(0xCAF6, None, "HANGUL SYLLABLE JJWAEGG", 0x31, "Hangul"),
    c(0xCAF7, None, "HANGUL SYLLABLE JJWAEGS", 0x31, "Hangul"),
    c(0xCAF8, None, "HANGUL SYLLABLE JJWAEN", 0x31, "Hangul"),
    c(0xCAF9, None, "HANGUL SYLLABLE JJWAENJ", 0x31, "Hangul"),
    c(0xCAFA, None, "HANGUL SYLLABLE JJWAENH", 0x31, "Hangul"),
    c(0xCAFB, None, "HANGUL SYLLABLE JJWAED", 0x31, "Hangul"),
    c(0xCAFC, None, "HANGUL SYLLABLE JJWAEL", 0x31, "Hangul"),
    c(0xCAFD, None, "HANGUL SYLLABLE JJWAELG", 0x31, "Hangul"),
    c(0xCAFE, None, "HANGUL SYLLABLE JJWAELM", 0x31, "Hangul"),
    c(0xCAFF, None, "HANGUL SYLLABLE JJWAELB", 0x31, "Hangul"),
    c(0xCB00, None, "HANGUL SYLLABLE JJWAELS", 0x31, "Hangul"),
    c(0xCB01, None, "HANGUL SYLLABLE JJWAELT", 0x31, "Hangul"),
    c(0xCB02, None, "HANGUL SYLLABLE JJWAELP", 0x31, "Hangul"),
    c(0xCB03, None, "HANGUL SYLLABLE JJWAELH", 0x31, "Hangul"),
    c(0xCB04, None, "HANGUL SYLLABLE JJWAEM", 0x31, "Hangul"),
    c(0xCB05, None, "HANGUL SYLLABLE JJWAEB", 0x31, "Hangul"),
    c(0xCB06, None, "HANGUL SYLLABLE JJWAEBS", 0x31, "Hangul"),
    c(0xCB07, None, "HANGUL SYLLABLE JJWAES", 0x31, "Hangul"),
    c(0xCB08, None, "HANGUL SYLLABLE JJWAESS", 0x31, "Hangul"),
    c(0xCB09, None, "HANGUL SYLLABLE JJWAENG", 0x31, "Hangul"),
    c(0xCB0A, None, "HANGUL SYLLABLE JJWAEJ", 0x31, "Hangul"),
    c(0xCB0B, None, "HANGUL SYLLABLE JJWAEC", 0x31, "Hangul"),
    c(0xCB0C, None, "HANGUL SYLLABLE JJWAEK", 0x31, "Hangul"),
    c(0xCB0D, None, "HANGUL SYLLABLE JJWAET", 0x31, "Hangul"),
    c(0xCB0E, None, "HANGUL SYLLABLE JJWAEP", 0x31, "Hangul"),
    c(0xCB0F, None, "HANGUL SYLLABLE JJWAEH", 0x31, "Hangul"),
    c(0xCB10, None, "HANGUL SYLLABLE JJOE", 0x31, "Hangul"),
    c(0xCB11, None, "HANGUL SYLLABLE JJOEG", 0x31, "Hangul"),
    c(0xCB12, None, "HANGUL SYLLABLE JJOEGG", 0x31, "Hangul"),
    c(0xCB13, None, "HANGUL SYLLABLE JJOEGS", 0x31, "Hangul"),
    c(0xCB14, None, "HANGUL SYLLABLE JJOEN", 0x31, "Hangul"),
    c(0xCB15, None, "HANGUL SYLLABLE JJOENJ", 0x31, "Hangul"),
    c(0xCB16, None, "HANGUL SYLLABLE JJOENH", 0x31, "Hangul"),
    c(0xCB17, None, "HANGUL SYLLABLE JJOED", 0x31, "Hangul"),
    c(0xCB18, None, "HANGUL SYLLABLE JJOEL", 0x31, "Hangul"),
    c(0xCB19, None, "HANGUL SYLLABLE JJOELG", 0x31, "Hangul"),
    c(0xCB1A, None, "HANGUL SYLLABLE JJOELM", 0x31, "Hangul"),
    c(0xCB1B, None, "HANGUL SYLLABLE JJOELB", 0x31, "Hangul"),
    c(0xCB1C, None, "HANGUL SYLLABLE JJOELS", 0x31, "Hangul"),
    c(0xCB1D, None, "HANGUL SYLLABLE JJOELT", 0x31, "Hangul"),
    c(0xCB1E, None, "HANGUL SYLLABLE JJOELP", 0x31, "Hangul"),
    c(0xCB1F, None, "HANGUL SYLLABLE JJOELH", 0x31, "Hangul"),
    c(0xCB20, None, "HANGUL SYLLABLE JJOEM", 0x31, "Hangul"),
    c(0xCB21, None, "HANGUL SYLLABLE JJOEB", 0x31, "Hangul"),
    c(0xCB22, None, "HANGUL SYLLABLE JJOEBS", 0x31, "Hangul"),
    c(0xCB23, None, "HANGUL SYLLABLE JJOES", 0x31, "Hangul"),
    c(0xCB24, None, "HANGUL SYLLABLE JJOESS", 0x31, "Hangul"),
    c(0xCB25, None, "HANGUL SYLLABLE JJOENG", 0x31, "Hangul"),
    c(0xCB26, None, "HANGUL SYLLABLE JJOEJ", 0x31, "Hangul"),
    c(0xCB27, None, "HANGUL SYLLABLE JJOEC", 0x31, "Hangul"),
    c(0xCB28, None, "HANGUL SYLLABLE JJOEK", 0x31, "Hangul"),
    c(0xCB29, None, "HANGUL SYLLABLE JJOET", 0x31, "Hangul"),
    c(0xCB2A, None, "HANGUL SYLLABLE JJOEP", 0x31, "Hangul"),
    c(0xCB2B, None, "HANGUL SYLLABLE JJOEH", 0x31, "Hangul"),
    c(0xCB2C, None, "HANGUL SYLLABLE JJYO", 0x31, "Hangul"),
    c(0xCB2D, None, "HANGUL SYLLABLE JJYOG", 0x31, "Hangul"),
    c(0xCB2E, None, "HANGUL SYLLABLE JJYOGG", 0x31, "Hangul"),
    c(0xCB2F, None, "HANGUL SYLLABLE JJYOGS", 0x31, "Hangul"),
    c(0xCB30, None, "HANGUL SYLLABLE JJYON", 0x31, "Hangul"),
    c(0xCB31, None, "HANGUL SYLLABLE JJYONJ", 0x31, "Hangul"),
    c(0xCB32, None, "HANGUL SYLLABLE JJYONH", 0x31, "Hangul"),
    c(0xCB33, None, "HANGUL SYLLABLE JJYOD", 0x31, "Hangul"),
    c(0xCB34, None, "HANGUL SYLLABLE JJYOL", 0x31, "Hangul"),
    c(0xCB35, None, "HANGUL SYLLABLE JJYOLG", 0x31, "Hangul"),
    c(0xCB36, None, "HANGUL SYLLABLE JJYOLM", 0x31, "Hangul"),
    c(0xCB37, None, "HANGUL SYLLABLE JJYOLB", 0x31, "Hangul"),
    c(0xCB38, None, "HANGUL SYLLABLE JJYOLS", 0x31, "Hangul"),
    c(0xCB39, None, "HANGUL SYLLABLE JJYOLT", 0x31, "Hangul"),
    c(0xCB3A, None, "HANGUL SYLLABLE JJYOLP", 0x31, "Hangul"),
    c(0xCB3B, None, "HANGUL SYLLABLE JJYOLH", 0x31, "Hangul"),
    c(0xCB3C, None, "HANGUL SYLLABLE JJYOM", 0x31, "Hangul"),
    c(0xCB3D, None, "HANGUL SYLLABLE JJYOB", 0x31, "Hangul"),
    c(0xCB3E, None, "HANGUL SYLLABLE JJYOBS", 0x31, "Hangul"),
    c(0xCB3F, None, "HANGUL SYLLABLE JJYOS", 0x31, "Hangul"),
    c(0xCB40, None, "HANGUL SYLLABLE JJYOSS", 0x31, "Hangul"),
    c(0xCB41, None, "HANGUL SYLLABLE JJYONG", 0x31, "Hangul"),
    c(0xCB42, None, "HANGUL SYLLABLE JJYOJ", 0x31, "Hangul"),
    c(0xCB43, None, "HANGUL SYLLABLE JJYOC", 0x31, "Hangul"),
    c(0xCB44, None, "HANGUL SYLLABLE JJYOK", 0x31, "Hangul"),
    c(0xCB45, None, "HANGUL SYLLABLE JJYOT", 0x31, "Hangul"),
    c(0xCB46, None, "HANGUL SYLLABLE JJYOP", 0x31, "Hangul"),
    c(0xCB47, None, "HANGUL SYLLABLE JJYOH", 0x31, "Hangul"),
    c(0xCB48, None, "HANGUL SYLLABLE JJU", 0x31, "Hangul"),
    c(0xCB49, None, "HANGUL SYLLABLE JJUG", 0x31, "Hangul"),
    c(0xCB4A, None, "HANGUL SYLLABLE JJUGG", 0x31, "Hangul"),
    c(0xCB4B, None, "HANGUL SYLLABLE JJUGS", 0x31, "Hangul"),
    c(0xCB4C, None, "HANGUL SYLLABLE JJUN", 0x31, "Hangul"),
    c(0xCB4D, None, "HANGUL SYLLABLE JJUNJ", 0x31, "Hangul"),
    c(0xCB4E, None, "HANGUL SYLLABLE JJUNH", 0x31, "Hangul"),
    c(0xCB4F, None, "HANGUL SYLLABLE JJUD", 0x31, "Hangul"),
    c(0xCB50, None, "HANGUL SYLLABLE JJUL", 0x31, "Hangul"),
    c(0xCB51, None, "HANGUL SYLLABLE JJULG", 0x31, "Hangul"),
    c(0xCB52, None, "HANGUL SYLLABLE JJULM", 0x31, "Hangul"),
    c(0xCB53, None, "HANGUL SYLLABLE JJULB", 0x31, "Hangul"),
    c(0xCB54, None, "HANGUL SYLLABLE JJULS", 0x31, "Hangul"),
    c(0xCB55, None, "HANGUL SYLLABLE JJULT", 0x31, "Hangul"),
    c(0xCB56, None, "HANGUL SYLLABLE JJULP", 0x31, "Hangul"),
    c(0xCB57, None, "HANGUL SYLLABLE JJULH", 0x31, "Hangul"),
    c(0xCB58, None, "HANGUL SYLLABLE JJUM", 0x31, "Hangul"),
    c(0xCB59, None, "HANGUL SYLLABLE JJUB", 0x31, "Hangul"),
    c(0xCB5A, None, "HANGUL SYLLABLE JJUBS", 0x31, "Hangul"),
    c(0xCB5B, None, "HANGUL SYLLABLE JJUS", 0x31, "Hangul"),
    c(0xCB5C, None, "HANGUL SYLLABLE JJUSS", 0x31, "Hangul"),
    c(0xCB5D, None, "HANGUL SYLLABLE JJUNG", 0x31, "Hangul"),
    c(0xCB5E, None, "HANGUL SYLLABLE JJUJ", 0x31, "Hangul"),
    c(0xCB5F, None, "HANGUL SYLLABLE JJUC", 0x31, "Hangul"),
    c(0xCB60, None, "HANGUL SYLLABLE JJUK", 0x31, "Hangul"),
    c(0xCB61, None, "HANGUL SYLLABLE JJUT", 0x31, "Hangul"),
    c(0xCB62, None, "HANGUL SYLLABLE JJUP", 0x31, "Hangul"),
    c(0xCB63, None, "HANGUL SYLLABLE JJUH", 0x31, "Hangul"),
    c(0xCB64, None, "HANGUL SYLLABLE JJWEO", 0x31, "Hangul"),
    c(0xCB65, None, "HANGUL SYLLABLE JJWEOG", 0x31, "Hangul"),
    c(0xCB66, None, "HANGUL SYLLABLE JJWEOGG", 0x31, "Hangul"),
    c(0xCB67, None, "HANGUL SYLLABLE JJWEOGS", 0x31, "Hangul"),
    c(0xCB68, None, "HANGUL SYLLABLE JJWEON", 0x31, "Hangul"),
    c(0xCB69, None, "HANGUL SYLLABLE JJWEONJ", 0x31, "Hangul"),
    c(0xCB6A, None, "HANGUL SYLLABLE JJWEONH", 0x31, "Hangul"),
    c(0xCB6B, None, "HANGUL SYLLABLE JJWEOD", 0x31, "Hangul"),
    c(0xCB6C, None, "HANGUL SYLLABLE JJWEOL", 0x31, "Hangul"),
    c(0xCB6D, None, "HANGUL SYLLABLE JJWEOLG", 0x31, "Hangul"),
    c(0xCB6E, None, "HANGUL SYLLABLE JJWEOLM", 0x31, "Hangul"),
    c(0xCB6F, None, "HANGUL SYLLABLE JJWEOLB", 0x31, "Hangul"),
    c(0xCB70, None, "HANGUL SYLLABLE JJWEOLS", 0x31, "Hangul"),
    c(0xCB71, None, "HANGUL SYLLABLE JJWEOLT", 0x31, "Hangul"),
    c(0xCB72, None, "HANGUL SYLLABLE JJWEOLP", 0x31, "Hangul"),
    c(0xCB73, None, "HANGUL SYLLABLE JJWEOLH", 0x31, "Hangul"),
    c(0xCB74, None, "HANGUL SYLLABLE JJWEOM", 0x31, "Hangul"),
    c(0xCB75, None, "HANGUL SYLLABLE JJWEOB", 0x31, "Hangul"),
    c(0xCB76, None, "HANGUL SYLLABLE JJWEOBS", 0x31, "Hangul"),
    c(0xCB77, None, "HANGUL SYLLABLE JJWEOS", 0x31, "Hangul"),
    c(0xCB78, None, "HANGUL SYLLABLE JJWEOSS", 0x31, "Hangul"),
    c(0xCB79, None, "HANGUL SYLLABLE JJWEONG", 0x31, "Hangul"),
    c(0xCB7A, None, "HANGUL SYLLABLE JJWEOJ", 0x31, "Hangul"),
    c(0xCB7B, None, "HANGUL SYLLABLE JJWEOC", 0x31, "Hangul"),
    c(0xCB7C, None, "HANGUL SYLLABLE JJWEOK", 0x31, "Hangul"),
    c(0xCB7D, None, "HANGUL SYLLABLE JJWEOT", 0x31, "Hangul"),
    c(0xCB7E, None, "HANGUL SYLLABLE JJWEOP", 0x31, "Hangul"),
    c(0xCB7F, None, "HANGUL SYLLABLE JJWEOH", 0x31, "Hangul"),
    c(0xCB80, None, "HANGUL SYLLABLE JJWE", 0x31, "Hangul"),
    c(0xCB81, None, "HANGUL SYLLABLE JJWEG", 0x31, "Hangul"),
    c(0xCB82, None, "HANGUL SYLLABLE JJWEGG", 0x31, "Hangul"),
    c(0xCB83, None, "HANGUL SYLLABLE JJWEGS", 0x31, "Hangul"),
    c(0xCB84, None, "HANGUL SYLLABLE JJWEN", 0x31, "Hangul"),
    c(0xCB85, None, "HANGUL SYLLABLE JJWENJ", 0x31, "Hangul"),
    c(0xCB86, None, "HANGUL SYLLABLE JJWENH", 0x31, "Hangul"),
    c(0xCB87, None, "HANGUL SYLLABLE JJWED", 0x31, "Hangul"),
    c(0xCB88, None, "HANGUL SYLLABLE JJWEL", 0x31, "Hangul"),
    c(0xCB89, None, "HANGUL SYLLABLE JJWELG", 0x31, "Hangul"),
    c(0xCB8A, None, "HANGUL SYLLABLE JJWELM", 0x31, "Hangul"),
    c(0xCB8B, None, "HANGUL SYLLABLE JJWELB", 0x31, "Hangul"),
    c(0xCB8C, None, "HANGUL SYLLABLE JJWELS", 0x31, "Hangul"),
    c(0xCB8D, None, "HANGUL SYLLABLE JJWELT", 0x31, "Hangul"),
    c(0xCB8E, None, "HANGUL SYLLABLE JJWELP", 0x31, "Hangul"),
    c(0xCB8F, None, "HANGUL SYLLABLE JJWELH", 0x31, "Hangul"),
    c(0xCB90, None, "HANGUL SYLLABLE JJWEM", 0x31, "Hangul"),
    c(0xCB91, None, "HANGUL SYLLABLE JJWEB", 0x31, "Hangul"),
    c(0xCB92, None, "HANGUL SYLLABLE JJWEBS", 0x31, "Hangul"),
    c(0xCB93, None, "HANGUL SYLLABLE JJWES", 0x31, "Hangul"),
    c(0xCB94, None, "HANGUL SYLLABLE JJWESS", 0x31, "Hangul"),
    c(0xCB95, None, "HANGUL SYLLABLE JJWENG", 0x31, "Hangul"),
    c(0xCB96, None, "HANGUL SYLLABLE JJWEJ", 0x31, "Hangul"),
    c(0xCB97, None, "HANGUL SYLLABLE JJWEC", 0x31, "Hangul"),
    c(0xCB98, None, "HANGUL SYLLABLE JJWEK", 0x31, "Hangul"),
    c(0xCB99, None, "HANGUL SYLLABLE JJWET", 0x31, "Hangul"),
    c(0xCB9A, None, "HANGUL SYLLABLE JJWEP", 0x31, "Hangul"),
    c(0xCB9B, None, "HANGUL SYLLABLE JJWEH", 0x31, "Hangul"),
    c(0xCB9C, None, "HANGUL SYLLABLE JJWI", 0x31, "Hangul"),
    c(0xCB9D, None, "HANGUL SYLLABLE JJWIG", 0x31, "Hangul"),
    c(0xCB9E, None, "HANGUL SYLLABLE JJWIGG", 0x31, "Hangul"),
    c(0xCB9F, None, "HANGUL SYLLABLE JJWIGS", 0x31, "Hangul"),
    c(0xCBA0, None, "HANGUL SYLLABLE JJWIN", 0x31, "Hangul"),
    c(0xCBA1, None, "HANGUL SYLLABLE JJWINJ", 0x31, "Hangul"),
    c(0xCBA2, None, "HANGUL SYLLABLE JJWINH", 0x31, "Hangul"),
    c(0xCBA3, None, "HANGUL SYLLABLE JJWID", 0x31, "Hangul"),
    c(0xCBA4, None, "HANGUL SYLLABLE JJWIL", 0x31, "Hangul"),
    c(0xCBA5, None, "HANGUL SYLLABLE JJWILG", 0x31, "Hangul"),
    c(0xCBA6, None, "HANGUL SYLLABLE JJWILM", 0x31, "Hangul"),
    c(0xCBA7, None, "HANGUL SYLLABLE JJWILB", 0x31, "Hangul"),
    c(0xCBA8, None, "HANGUL SYLLABLE JJWILS", 0x31, "Hangul"),
    c(0xCBA9, None, "HANGUL SYLLABLE JJWILT", 0x31, "Hangul"),
    c(0xCBAA, None, "HANGUL SYLLABLE JJWILP", 0x31, "Hangul"),
    c(0xCBAB, None, "HANGUL SYLLABLE JJWILH", 0x31, "Hangul"),
    c(0xCBAC, None, "HANGUL SYLLABLE JJWIM", 0x31, "Hangul"),
    c(0xCBAD, None, "HANGUL SYLLABLE JJWIB", 0x31, "Hangul"),
    c(0xCBAE, None, "HANGUL SYLLABLE JJWIBS", 0x31, "Hangul"),
    c(0xCBAF, None, "HANGUL SYLLABLE JJWIS", 0x31, "Hangul"),
    c(0xCBB0, None, "HANGUL SYLLABLE JJWISS", 0x31, "Hangul"),
    c(0xCBB1, None, "HANGUL SYLLABLE JJWING", 0x31, "Hangul"),
    c(0xCBB2, None, "HANGUL SYLLABLE JJWIJ", 0x31, "Hangul"),
    c(0xCBB3, None, "HANGUL SYLLABLE JJWIC", 0x31, "Hangul"),
    c(0xCBB4, None, "HANGUL SYLLABLE JJWIK", 0x31, "Hangul"),
    c(0xCBB5, None, "HANGUL SYLLABLE JJWIT", 0x31, "Hangul"),
    c(0xCBB6, None, "HANGUL SYLLABLE JJWIP", 0x31, "Hangul"),
    c(0xCBB7, None, "HANGUL SYLLABLE JJWIH", 0x31, "Hangul"),
    c(0xCBB8, None, "HANGUL SYLLABLE JJYU", 0x31, "Hangul"),
    c(0xCBB9, None, "HANGUL SYLLABLE JJYUG", 0x31, "Hangul"),
    c(0xCBBA, None, "HANGUL SYLLABLE JJYUGG", 0x31, "Hangul"),
    c(0xCBBB, None, "HANGUL SYLLABLE JJYUGS", 0x31, "Hangul"),
    c(0xCBBC, None, "HANGUL SYLLABLE JJYUN", 0x31, "Hangul"),
    c(0xCBBD, None, "HANGUL SYLLABLE JJYUNJ", 0x31, "Hangul"),
    c(0xCBBE, None, "HANGUL SYLLABLE JJYUNH", 0x31, "Hangul"),
    c(0xCBBF, None, "HANGUL SYLLABLE JJYUD", 0x31, "Hangul"),
    c(0xCBC0, None, "HANGUL SYLLABLE JJYUL", 0x31, "Hangul"),
    c(0xCBC1, None, "HANGUL SYLLABLE JJYULG", 0x31, "Hangul"),
    c(0xCBC2, None, "HANGUL SYLLABLE JJYULM", 0x31, "Hangul"),
    c(0xCBC3, None, "HANGUL SYLLABLE JJYULB", 0x31, "Hangul"),
    c(0xCBC4, None, "HANGUL SYLLABLE JJYULS", 0x31, "Hangul"),
    c(0xCBC5, None, "HANGUL SYLLABLE JJYULT", 0x31, "Hangul"),
    c(0xCBC6, None, "HANGUL SYLLABLE JJYULP", 0x31, "Hangul"),
    c(0xCBC7, None, "HANGUL SYLLABLE JJYULH", 0x31, "Hangul"),
    c(0xCBC8, None, "HANGUL SYLLABLE JJYUM", 0x31, "Hangul"),
    c(0xCBC9, None, "HANGUL SYLLABLE JJYUB", 0x31, "Hangul"),
    c(0xCBCA, None, "HANGUL SYLLABLE JJYUBS", 0x31, "Hangul"),
    c(0xCBCB, None, "HANGUL SYLLABLE JJYUS", 0x31, "Hangul"),
    c(0xCBCC, None, "HANGUL SYLLABLE JJYUSS", 0x31, "Hangul"),
    c(0xCBCD, None, "HANGUL SYLLABLE JJYUNG", 0x31, "Hangul"),
    c(0xCBCE, None, "HANGUL SYLLABLE JJYUJ", 0x31, "Hangul"),
    c(0xCBCF, None, "HANGUL SYLLABLE JJYUC", 0x31, "Hangul"),
    c(0xCBD0, None, "HANGUL SYLLABLE JJYUK", 0x31, "Hangul"),
    c(0xCBD1, None, "HANGUL SYLLABLE JJYUT", 0x31, "Hangul"),
    c(0xCBD2, None, "HANGUL SYLLABLE JJYUP", 0x31, "Hangul"),
    c(0xCBD3, None, "HANGUL SYLLABLE JJYUH", 0x31, "Hangul"),
    c(0xCBD4, None, "HANGUL SYLLABLE JJEU", 0x31, "Hangul"),
    c(0xCBD5, None, "HANGUL SYLLABLE JJEUG", 0x31, "Hangul"),
    c(0xCBD6, None, "HANGUL SYLLABLE JJEUGG", 0x31, "Hangul"),
    c(0xCBD7, None, "HANGUL SYLLABLE JJEUGS", 0x31, "Hangul"),
    c(0xCBD8, None, "HANGUL SYLLABLE JJEUN", 0x31, "Hangul"),
    c(0xCBD9, None, "HANGUL SYLLABLE JJEUNJ", 0x31, "Hangul"),
    c(0xCBDA, None, "HANGUL SYLLABLE JJEUNH", 0x31, "Hangul"),
    c(0xCBDB, None, "HANGUL SYLLABLE JJEUD", 0x31, "Hangul"),
    c(0xCBDC, None, "HANGUL SYLLABLE JJEUL", 0x31, "Hangul"),
    c(0xCBDD, None, "HANGUL SYLLABLE JJEULG", 0x31, "Hangul"),
    c(0xCBDE, None, "HANGUL SYLLABLE JJEULM", 0x31, "Hangul"),
    c(0xCBDF, None, "HANGUL SYLLABLE JJEULB", 0x31, "Hangul"),
    c(0xCBE0, None, "HANGUL SYLLABLE JJEULS", 0x31, "Hangul"),
    c(0xCBE1, None, "HANGUL SYLLABLE JJEULT", 0x31, "Hangul"),
    c(0xCBE2, None, "HANGUL SYLLABLE JJEULP", 0x31, "Hangul"),
    c(0xCBE3, None, "HANGUL SYLLABLE JJEULH", 0x31, "Hangul"),
    c(0xCBE4, None, "HANGUL SYLLABLE JJEUM", 0x31, "Hangul"),
    c(0xCBE5, None, "HANGUL SYLLABLE JJEUB", 0x31, "Hangul"),
    c(0xCBE6, None, "HANGUL SYLLABLE JJEUBS", 0x31, "Hangul"),
    c(0xCBE7, None, "HANGUL SYLLABLE JJEUS", 0x31, "Hangul"),
    c(0xCBE8, None, "HANGUL SYLLABLE JJEUSS", 0x31, "Hangul"),
    c(0xCBE9, None, "HANGUL SYLLABLE JJEUNG", 0x31, "Hangul"),
    c(0xCBEA, None, "HANGUL SYLLABLE JJEUJ", 0x31, "Hangul"),
    c(0xCBEB, None, "HANGUL SYLLABLE JJEUC", 0x31, "Hangul"),
    c(0xCBEC, None, "HANGUL SYLLABLE JJEUK", 0x31, "Hangul"),
    c(0xCBED, None, "HANGUL SYLLABLE JJEUT", 0x31, "Hangul"),
    c(0xCBEE, None, "HANGUL SYLLABLE JJEUP", 0x31, "Hangul"),
    c(0xCBEF, None, "HANGUL SYLLABLE JJEUH", 0x31, "Hangul"),
    c(0xCBF0, None, "HANGUL SYLLABLE JJYI", 0x31, "Hangul"),
    c(0xCBF1, None, "HANGUL SYLLABLE JJYIG", 0x31, "Hangul"),
    c(0xCBF2, None, "HANGUL SYLLABLE JJYIGG", 0x31, "Hangul"),
    c(0xCBF3, None, "HANGUL SYLLABLE JJYIGS", 0x31, "Hangul"),
    c(0xCBF4, None, "HANGUL SYLLABLE JJYIN", 0x31, "Hangul"),
    c(0xCBF5, None, "HANGUL SYLLABLE JJYINJ", 0x31, "Hangul"),
    c(0xCBF6, None, "HANGUL SYLLABLE JJYINH", 0x31, "Hangul"),
    c(0xCBF7, None, "HANGUL SYLLABLE JJYID", 0x31, "Hangul"),
    c(0xCBF8, None, "HANGUL SYLLABLE JJYIL", 0x31, "Hangul"),
    c(0xCBF9, None, "HANGUL SYLLABLE JJYILG", 0x31, "Hangul"),
    c(0xCBFA, None, "HANGUL SYLLABLE JJYILM", 0x31, "Hangul"),
    c(0xCBFB, None, "HANGUL SYLLABLE JJYILB", 0x31, "Hangul"),
    c(0xCBFC, None, "HANGUL SYLLABLE JJYILS", 0x31, "Hangul"),
    c(0xCBFD, None, "HANGUL SYLLABLE JJYILT", 0x31, "Hangul"),
    c(0xCBFE, None, "HANGUL SYLLABLE JJYILP", 0x31, "Hangul"),
    c(0xCBFF, None, "HANGUL SYLLABLE JJYILH", 0x31, "Hangul"),
    c(0xCC00, None, "HANGUL SYLLABLE JJYIM", 0x31, "Hangul"),
    c(0xCC01, None, "HANGUL SYLLABLE JJYIB", 0x31, "Hangul"),
    c(0xCC02, None, "HANGUL SYLLABLE JJYIBS", 0x31, "Hangul"),
    c(0xCC03, None, "HANGUL SYLLABLE JJYIS", 0x31, "Hangul"),
    c(0xCC04, None, "HANGUL SYLLABLE JJYISS", 0x31, "Hangul"),
    c(0xCC05, None, "HANGUL SYLLABLE JJYING", 0x31, "Hangul"),
    c(0xCC06, None, "HANGUL SYLLABLE JJYIJ", 0x31, "Hangul"),
    c(0xCC07, None, "HANGUL SYLLABLE JJYIC", 0x31, "Hangul"),
    c(0xCC08, None, "HANGUL SYLLABLE JJYIK", 0x31, "Hangul"),
    c(0xCC09, None, "HANGUL SYLLABLE JJYIT", 0x31, "Hangul"),
    c(0xCC0A, None, "HANGUL SYLLABLE JJYIP", 0x31, "Hangul"),
    c(0xCC0B, None, "HANGUL SYLLABLE JJYIH", 0x31, "Hangul"),
    c(0xCC0C, None, "HANGUL SYLLABLE JJI", 0x31, "Hangul"),
    c(0xCC0D, None, "HANGUL SYLLABLE JJIG", 0x31, "Hangul"),
    c(0xCC0E, None, "HANGUL SYLLABLE JJIGG", 0x31, "Hangul"),
    c(0xCC0F, None, "HANGUL SYLLABLE JJIGS", 0x31, "Hangul"),
    c(0xCC10, None, "HANGUL SYLLABLE JJIN", 0x31, "Hangul"),
    c(0xCC11, None, "HANGUL SYLLABLE JJINJ", 0x31, "Hangul"),
    c(0xCC12, None, "HANGUL SYLLABLE JJINH", 0x31, "Hangul"),
    c(0xCC13, None, "HANGUL SYLLABLE JJID", 0x31, "Hangul"),
    c(0xCC14, None, "HANGUL SYLLABLE JJIL", 0x31, "Hangul"),
    c(0xCC15, None, "HANGUL SYLLABLE JJILG", 0x31, "Hangul"),
    c(0xCC16, None, "HANGUL SYLLABLE JJILM", 0x31, "Hangul"),
    c(0xCC17, None, "HANGUL SYLLABLE JJILB", 0x31, "Hangul"),
    c(0xCC18, None, "HANGUL SYLLABLE JJILS", 0x31, "Hangul"),
    c(0xCC19, None, "HANGUL SYLLABLE JJILT", 0x31, "Hangul"),
    c(0xCC1A, None, "HANGUL SYLLABLE JJILP", 0x31, "Hangul"),
    c(0xCC1B, None, "HANGUL SYLLABLE JJILH", 0x31, "Hangul"),
    c(0xCC1C, None, "HANGUL SYLLABLE JJIM", 0x31, "Hangul"),
    c(0xCC1D, None, "HANGUL SYLLABLE JJIB", 0x31, "Hangul"),
    c(0xCC1E, None, "HANGUL SYLLABLE JJIBS", 0x31, "Hangul"),
    c(0xCC1F, None, "HANGUL SYLLABLE JJIS", 0x31, "Hangul"),
    c(0xCC20, None, "HANGUL SYLLABLE JJISS", 0x31, "Hangul"),
    c(0xCC21, None, "HANGUL SYLLABLE JJING", 0x31, "Hangul"),
    c(0xCC22, None, "HANGUL SYLLABLE JJIJ", 0x31, "Hangul"),
    c(0xCC23, None, "HANGUL SYLLABLE JJIC", 0x31, "Hangul"),
    c(0xCC24, None, "HANGUL SYLLABLE JJIK", 0x31, "Hangul"),
    c(0xCC25, None, "HANGUL SYLLABLE JJIT", 0x31, "Hangul"),
    c(0xCC26, None, "HANGUL SYLLABLE JJIP", 0x31, "Hangul"),
    c(0xCC27, None, "HANGUL SYLLABLE JJIH", 0x31, "Hangul"),
    c(0xCC28, None, "HANGUL SYLLABLE CA", 0x31, "Hangul"),
    c(0xCC29, None, "HANGUL SYLLABLE CAG", 0x31, "Hangul"),
    c(0xCC2A, None, "HANGUL SYLLABLE CAGG", 0x31, "Hangul"),
    c(0xCC2B, None, "HANGUL SYLLABLE CAGS", 0x31, "Hangul"),
    c(0xCC2C, None, "HANGUL SYLLABLE CAN", 0x31, "Hangul"),
    c(0xCC2D, None, "HANGUL SYLLABLE CANJ", 0x31, "Hangul"),
    c(0xCC2E, None, "HANGUL SYLLABLE CANH", 0x31, "Hangul"),
    c(0xCC2F, None, "HANGUL SYLLABLE CAD", 0x31, "Hangul"),
    c(0xCC30, None, "HANGUL SYLLABLE CAL", 0x31, "Hangul"),
    c(0xCC31, None, "HANGUL SYLLABLE CALG", 0x31, "Hangul"),
    c(0xCC32, None, "HANGUL SYLLABLE CALM", 0x31, "Hangul"),
    c(0xCC33, None, "HANGUL SYLLABLE CALB", 0x31, "Hangul"),
    c(0xCC34, None, "HANGUL SYLLABLE CALS", 0x31, "Hangul"),
    c(0xCC35, None, "HANGUL SYLLABLE CALT", 0x31, "Hangul"),
    c(0xCC36, None, "HANGUL SYLLABLE CALP", 0x31, "Hangul"),
    c(0xCC37, None, "HANGUL SYLLABLE CALH", 0x31, "Hangul"),
    c(0xCC38, None, "HANGUL SYLLABLE CAM", 0x31, "Hangul"),
    c(0xCC39, None, "HANGUL SYLLABLE CAB", 0x31, "Hangul"),
    c(0xCC3A, None, "HANGUL SYLLABLE CABS", 0x31, "Hangul"),
    c(0xCC3B, None, "HANGUL SYLLABLE CAS", 0x31, "Hangul"),
    c(0xCC3C, None, "HANGUL SYLLABLE CASS", 0x31, "Hangul"),
    c(0xCC3D, None, "HANGUL SYLLABLE CANG", 0x31, "Hangul"),
    c(0xCC3E, None, "HANGUL SYLLABLE CAJ", 0x31, "Hangul"),
    c(0xCC3F, None, "HANGUL SYLLABLE CAC", 0x31, "Hangul"),
    c(0xCC40, None, "HANGUL SYLLABLE CAK", 0x31, "Hangul"),
    c(0xCC41, None, "HANGUL SYLLABLE CAT", 0x31, "Hangul"),
    c(0xCC42, None, "HANGUL SYLLABLE CAP", 0x31, "Hangul"),
    c(0xCC43, None, "HANGUL SYLLABLE CAH", 0x31, "Hangul"),
    c(0xCC44, None, "HANGUL SYLLABLE CAE", 0x31, "Hangul"),
    c(0xCC45, None, "HANGUL SYLLABLE CAEG", 0x31, "Hangul"),
    c(0xCC46, None, "HANGUL SYLLABLE CAEGG", 0x31, "Hangul"),
    c(0xCC47, None, "HANGUL SYLLABLE CAEGS", 0x31, "Hangul"),
    c(0xCC48, None, "HANGUL SYLLABLE CAEN", 0x31, "Hangul"),
    c(0xCC49, None, "HANGUL SYLLABLE CAENJ", 0x31, "Hangul"),
    c(0xCC4A, None, "HANGUL SYLLABLE CAENH", 0x31, "Hangul"),
    c(0xCC4B, None, "HANGUL SYLLABLE CAED", 0x31, "Hangul"),
    c(0xCC4C, None, "HANGUL SYLLABLE CAEL", 0x31, "Hangul"),
    c(0xCC4D, None, "HANGUL SYLLABLE CAELG", 0x31, "Hangul"),
    c(0xCC4E, None, "HANGUL SYLLABLE CAELM", 0x31, "Hangul"),
    c(0xCC4F, None, "HANGUL SYLLABLE CAELB", 0x31, "Hangul"),
    c(0xCC50, None, "HANGUL SYLLABLE CAELS", 0x31, "Hangul"),
    c(0xCC51, None, "HANGUL SYLLABLE CAELT", 0x31, "Hangul"),
    c(0xCC52, None, "HANGUL SYLLABLE CAELP", 0x31, "Hangul"),
    c(0xCC53, None, "HANGUL SYLLABLE CAELH", 0x31, "Hangul"),
    c(0xCC54, None, "HANGUL SYLLABLE CAEM", 0x31, "Hangul"),
    c(0xCC55, None, "HANGUL SYLLABLE CAEB", 0x31, "Hangul"),
    c(0xCC56, None, "HANGUL SYLLABLE CAEBS", 0x31, "Hangul"),
    c(0xCC57, None, "HANGUL SYLLABLE CAES", 0x31, "Hangul"),
    c(0xCC58, None, "HANGUL SYLLABLE CAESS", 0x31, "Hangul"),
    c(0xCC59, None, "HANGUL SYLLABLE CAENG", 0x31, "Hangul"),
    c(0xCC5A, None, "HANGUL SYLLABLE CAEJ", 0x31, "Hangul"),
    c(0xCC5B, None, "HANGUL SYLLABLE CAEC", 0x31, "Hangul"),
    c(0xCC5C, None, "HANGUL SYLLABLE CAEK", 0x31, "Hangul"),
    c(0xCC5D, None, "HANGUL SYLLABLE CAET", 0x31, "Hangul"),
    c(0xCC5E, None, "HANGUL SYLLABLE CAEP", 0x31, "Hangul"),
    c(0xCC5F, None, "HANGUL SYLLABLE CAEH", 0x31, "Hangul"),
    c(0xCC60, None, "HANGUL SYLLABLE CYA", 0x31, "Hangul"),
    c(0xCC61, None, "HANGUL SYLLABLE CYAG", 0x31, "Hangul"),
    c(0xCC62, None, "HANGUL SYLLABLE CYAGG", 0x31, "Hangul"),
    c(0xCC63, None, "HANGUL SYLLABLE CYAGS", 0x31, "Hangul"),
    c(0xCC64, None, "HANGUL SYLLABLE CYAN", 0x31, "Hangul"),
    c(0xCC65, None, "HANGUL SYLLABLE CYANJ", 0x31, "Hangul"),
    c(0xCC66, None, "HANGUL SYLLABLE CYANH", 0x31, "Hangul"),
    c(0xCC67, None, "HANGUL SYLLABLE CYAD", 0x31, "Hangul"),
    c(0xCC68, None, "HANGUL SYLLABLE CYAL", 0x31, "Hangul"),
    c(0xCC69, None, "HANGUL SYLLABLE CYALG", 0x31, "Hangul"),
    c(0xCC6A, None, "HANGUL SYLLABLE CYALM", 0x31, "Hangul"),
    c(0xCC6B, None, "HANGUL SYLLABLE CYALB", 0x31, "Hangul"),
    c(0xCC6C, None, "HANGUL SYLLABLE CYALS", 0x31, "Hangul"),
    c(0xCC6D, None, "HANGUL SYLLABLE CYALT", 0x31, "Hangul"),
    c(0xCC6E, None, "HANGUL SYLLABLE CYALP", 0x31, "Hangul"),
    c(0xCC6F, None, "HANGUL SYLLABLE CYALH", 0x31, "Hangul"),
    c(0xCC70, None, "HANGUL SYLLABLE CYAM", 0x31, "Hangul"),
    c(0xCC71, None, "HANGUL SYLLABLE CYAB", 0x31, "Hangul"),
    c(0xCC72, None, "HANGUL SYLLABLE CYABS", 0x31, "Hangul"),
    c(0xCC73, None, "HANGUL SYLLABLE CYAS", 0x31, "Hangul"),
    c(0xCC74, None, "HANGUL SYLLABLE CYASS", 0x31, "Hangul"),
    c(0xCC75, None, "HANGUL SYLLABLE CYANG", 0x31, "Hangul"),
    c(0xCC76, None, "HANGUL SYLLABLE CYAJ", 0x31, "Hangul"),
    c(0xCC77, None, "HANGUL SYLLABLE CYAC", 0x31, "Hangul"),
    c(0xCC78, None, "HANGUL SYLLABLE CYAK", 0x31, "Hangul"),
    c(0xCC79, None, "HANGUL SYLLABLE CYAT", 0x31, "Hangul"),
    c(0xCC7A, None, "HANGUL SYLLABLE CYAP", 0x31, "Hangul"),
    c(0xCC7B, None, "HANGUL SYLLABLE CYAH", 0x31, "Hangul"),
    c(0xCC7C, None, "HANGUL SYLLABLE CYAE", 0x31, "Hangul"),
    c(0xCC7D, None, "HANGUL SYLLABLE CYAEG", 0x31, "Hangul"),
    c(0xCC7E, None, "HANGUL SYLLABLE CYAEGG", 0x31, "Hangul"),
    c(0xCC7F, None, "HANGUL SYLLABLE CYAEGS", 0x31, "Hangul"),
    c(0xCC80, None, "HANGUL SYLLABLE CYAEN", 0x31, "Hangul"),
    c(0xCC81, None, "HANGUL SYLLABLE CYAENJ", 0x31, "Hangul"),
    c(0xCC82, None, "HANGUL SYLLABLE CYAENH", 0x31, "Hangul"),
    c(0xCC83, None, "HANGUL SYLLABLE CYAED", 0x31, "Hangul"),
    c(0xCC84, None, "HANGUL SYLLABLE CYAEL", 0x31, "Hangul"),
    c(0xCC85, None, "HANGUL SYLLABLE CYAELG", 0x31, "Hangul"),
    c(0xCC86, None, "HANGUL SYLLABLE CYAELM", 0x31, "Hangul"),
    c(0xCC87, None, "HANGUL SYLLABLE CYAELB", 0x31, "Hangul"),
    c(0xCC88, None, "HANGUL SYLLABLE CYAELS", 0x31, "Hangul"),
    c(0xCC89, None, "HANGUL SYLLABLE CYAELT", 0x31, "Hangul"),
    c(0xCC8A, None, "HANGUL SYLLABLE CYAELP", 0x31, "Hangul"),
    c(0xCC8B, None, "HANGUL SYLLABLE CYAELH", 0x31, "Hangul"),
    c(0xCC8C, None, "HANGUL SYLLABLE CYAEM", 0x31, "Hangul"),
    c(0xCC8D, None, "HANGUL SYLLABLE CYAEB", 0x31, "Hangul"),
    c(0xCC8E, None, "HANGUL SYLLABLE CYAEBS", 0x31, "Hangul"),
    c(0xCC8F, None, "HANGUL SYLLABLE CYAES", 0x31, "Hangul"),
    c(0xCC90, None, "HANGUL SYLLABLE CYAESS", 0x31, "Hangul"),
    c(0xCC91, None, "HANGUL SYLLABLE CYAENG", 0x31, "Hangul"),
    c(0xCC92, None, "HANGUL SYLLABLE CYAEJ", 0x31, "Hangul"),
    c(0xCC93, None, "HANGUL SYLLABLE CYAEC", 0x31, "Hangul"),
    c(0xCC94, None, "HANGUL SYLLABLE CYAEK", 0x31, "Hangul"),
    c(0xCC95, None, "HANGUL SYLLABLE CYAET", 0x31, "Hangul"),
    c(0xCC96, None, "HANGUL SYLLABLE CYAEP", 0x31, "Hangul"),
    c(0xCC97, None, "HANGUL SYLLABLE CYAEH", 0x31, "Hangul"),
    c(0xCC98, None, "HANGUL SYLLABLE CEO", 0x31, "Hangul"),
    c(0xCC99, None, "HANGUL SYLLABLE CEOG", 0x31, "Hangul"),
    c(0xCC9A, None, "HANGUL SYLLABLE CEOGG", 0x31, "Hangul"),
    c(0xCC9B, None, "HANGUL SYLLABLE CEOGS", 0x31, "Hangul"),
    c(0xCC9C, None, "HANGUL SYLLABLE CEON", 0x31, "Hangul"),
    c(0xCC9D, None, "HANGUL SYLLABLE CEONJ", 0x31, "Hangul"),
    c(0xCC9E, None, "HANGUL SYLLABLE CEONH", 0x31, "Hangul"),
    c(0xCC9F, None, "HANGUL SYLLABLE CEOD", 0x31, "Hangul"),
    c(0xCCA0, None, "HANGUL SYLLABLE CEOL", 0x31, "Hangul"),
    c(0xCCA1, None, "HANGUL SYLLABLE CEOLG", 0x31, "Hangul"),
    c(0xCCA2, None, "HANGUL SYLLABLE CEOLM", 0x31, "Hangul"),
    c(0xCCA3, None, "HANGUL SYLLABLE CEOLB", 0x31, "Hangul"),
    c(0xCCA4, None, "HANGUL SYLLABLE CEOLS", 0x31, "Hangul"),
    c(0xCCA5, None, "HANGUL SYLLABLE CEOLT", 0x31, "Hangul"),
    c(0xCCA6, None, "HANGUL SYLLABLE CEOLP", 0x31, "Hangul"),
    c(0xCCA7, None, "HANGUL SYLLABLE CEOLH", 0x31, "Hangul"),
    c(0xCCA8, None, "HANGUL SYLLABLE CEOM", 0x31, "Hangul"),
    c(0xCCA9, None, "HANGUL SYLLABLE CEOB", 0x31, "Hangul"),
    c(0xCCAA, None, "HANGUL SYLLABLE CEOBS", 0x31, "Hangul"),
    c(0xCCAB, None, "HANGUL SYLLABLE CEOS", 0x31, "Hangul"),
    c(0xCCAC, None, "HANGUL SYLLABLE CEOSS", 0x31, "Hangul"),
    c(0xCCAD, None, "HANGUL SYLLABLE CEONG", 0x31, "Hangul"),
    c(0xCCAE, None, "HANGUL SYLLABLE CEOJ", 0x31, "Hangul"),
    c(0xCCAF, None, "HANGUL SYLLABLE CEOC", 0x31, "Hangul"),
    c(0xCCB0, None, "HANGUL SYLLABLE CEOK", 0x31, "Hangul"),
    c(0xCCB1, None, "HANGUL SYLLABLE CEOT", 0x31, "Hangul"),
    c(0xCCB2, None, "HANGUL SYLLABLE CEOP", 0x31, "Hangul"),
    c(0xCCB3, None, "HANGUL SYLLABLE CEOH", 0x31, "Hangul"),
    c(0xCCB4, None, "HANGUL SYLLABLE CE", 0x31, "Hangul"),
    c(0xCCB5, None, "HANGUL SYLLABLE CEG", 0x31, "Hangul"),
    c(0xCCB6, None, "HANGUL SYLLABLE CEGG", 0x31, "Hangul"),
    c(0xCCB7, None, "HANGUL SYLLABLE CEGS", 0x31, "Hangul"),
    c(0xCCB8, None, "HANGUL SYLLABLE CEN", 0x31, "Hangul"),
    c(0xCCB9, None, "HANGUL SYLLABLE CENJ", 0x31, "Hangul"),
    c(0xCCBA, None, "HANGUL SYLLABLE CENH", 0x31, "Hangul"),
    c(0xCCBB, None, "HANGUL SYLLABLE CED", 0x31, "Hangul"),
    c(0xCCBC, None, "HANGUL SYLLABLE CEL", 0x31, "Hangul"),
    c(0xCCBD, None, "HANGUL SYLLABLE CELG", 0x31, "Hangul"),
    c(0xCCBE, None, "HANGUL SYLLABLE CELM", 0x31, "Hangul"),
    c(0xCCBF, None, "HANGUL SYLLABLE CELB", 0x31, "Hangul"),
    c(0xCCC0, None, "HANGUL SYLLABLE CELS", 0x31, "Hangul"),
    c(0xCCC1, None, "HANGUL SYLLABLE CELT", 0x31, "Hangul"),
    c(0xCCC2, None, "HANGUL SYLLABLE CELP", 0x31, "Hangul"),
    c(0xCCC3, None, "HANGUL SYLLABLE CELH", 0x31, "Hangul"),
    c(0xCCC4, None, "HANGUL SYLLABLE CEM", 0x31, "Hangul"),
    c(0xCCC5, None, "HANGUL SYLLABLE CEB", 0x31, "Hangul"),
    c(0xCCC6, None, "HANGUL SYLLABLE CEBS", 0x31, "Hangul"),
    c(0xCCC7, None, "HANGUL SYLLABLE CES", 0x31, "Hangul"),
    c(0xCCC8, None, "HANGUL SYLLABLE CESS", 0x31, "Hangul"),
    c(0xCCC9, None, "HANGUL SYLLABLE CENG", 0x31, "Hangul"),
    c(0xCCCA, None, "HANGUL SYLLABLE CEJ", 0x31, "Hangul"),
    c(0xCCCB, None, "HANGUL SYLLABLE CEC", 0x31, "Hangul"),
    c(0xCCCC, None, "HANGUL SYLLABLE CEK", 0x31, "Hangul"),
    c(0xCCCD, None, "HANGUL SYLLABLE CET", 0x31, "Hangul"),
    c(0xCCCE, None, "HANGUL SYLLABLE CEP", 0x31, "Hangul"),
    c(0xCCCF, None, "HANGUL SYLLABLE CEH", 0x31, "Hangul"),
    c(0xCCD0, None, "HANGUL SYLLABLE CYEO", 0x31, "Hangul"),
    c(0xCCD1, None, "HANGUL SYLLABLE CYEOG", 0x31, "Hangul"),
    c(0xCCD2, None, "HANGUL SYLLABLE CYEOGG", 0x31, "Hangul"),
    c(0xCCD3, None, "HANGUL SYLLABLE CYEOGS", 0x31, "Hangul"),
    c(0xCCD4, None, "HANGUL SYLLABLE CYEON", 0x31, "Hangul"),
    c(0xCCD5, None, "HANGUL SYLLABLE CYEONJ", 0x31, "Hangul"),
    c(0xCCD6, None, "HANGUL SYLLABLE CYEONH", 0x31, "Hangul"),
    c(0xCCD7, None, "HANGUL SYLLABLE CYEOD", 0x31, "Hangul"),
    c(0xCCD8, None, "HANGUL SYLLABLE CYEOL", 0x31, "Hangul"),
    c(0xCCD9, None, "HANGUL SYLLABLE CYEOLG", 0x31, "Hangul"),
    c(0xCCDA, None, "HANGUL SYLLABLE CYEOLM", 0x31, "Hangul"),
    c(0xCCDB, None, "HANGUL SYLLABLE CYEOLB", 0x31, "Hangul"),
    c(0xCCDC, None, "HANGUL SYLLABLE CYEOLS", 0x31, "Hangul"),
    c(0xCCDD, None, "HANGUL SYLLABLE CYEOLT", 0x31, "Hangul"),
    c(0xCCDE, None, "HANGUL SYLLABLE CYEOLP", 0x31, "Hangul"),
    c(0xCCDF, None, "HANGUL SYLLABLE CYEOLH", 0x31, "Hangul"),
    c(0xCCE0, None, "HANGUL SYLLABLE CYEOM", 0x31, "Hangul"),
    c(0xCCE1, None, "HANGUL SYLLABLE CYEOB", 0x31, "Hangul"),
    c(0xCCE2, None, "HANGUL SYLLABLE CYEOBS", 0x31, "Hangul"),
    c(0xCCE3, None, "HANGUL SYLLABLE CYEOS", 0x31, "Hangul"),
    c(0xCCE4, None, "HANGUL SYLLABLE CYEOSS", 0x31, "Hangul"),
    c(0xCCE5, None, "HANGUL SYLLABLE CYEONG", 0x31, "Hangul"),
    c(0xCCE6, None, "HANGUL SYLLABLE CYEOJ", 0x31, "Hangul"),
    c(0xCCE7, None, "HANGUL SYLLABLE CYEOC", 0x31, "Hangul"),
    c(0xCCE8, None, "HANGUL SYLLABLE CYEOK", 0x31, "Hangul"),
    c(0xCCE9, None, "HANGUL SYLLABLE CYEOT", 0x31, "Hangul"),
    c(0xCCEA, None, "HANGUL SYLLABLE CYEOP", 0x31, "Hangul"),
    c(0xCCEB, None, "HANGUL SYLLABLE CYEOH", 0x31, "Hangul"),
    c(0xCCEC, None, "HANGUL SYLLABLE CYE", 0x31, "Hangul"),
    c(0xCCED, None, "HANGUL SYLLABLE CYEG", 0x31, "Hangul"),
    c(0xCCEE, None, "HANGUL SYLLABLE CYEGG", 0x31, "Hangul"),
    c(0xCCEF, None, "HANGUL SYLLABLE CYEGS", 0x31, "Hangul"),
    c(0xCCF0, None, "HANGUL SYLLABLE CYEN", 0x31, "Hangul"),
    c(0xCCF1, None, "HANGUL SYLLABLE CYENJ", 0x31, "Hangul"),
    c(0xCCF2, None, "HANGUL SYLLABLE CYENH", 0x31, "Hangul"),
    c(0xCCF3, None, "HANGUL SYLLABLE CYED", 0x31, "Hangul"),
    c(0xCCF4, None, "HANGUL SYLLABLE CYEL", 0x31, "Hangul"),
    c(0xCCF5, None, "HANGUL SYLLABLE CYELG", 0x31, "Hangul"),
    c(0xCCF6, None, "HANGUL SYLLABLE CYELM", 0x31, "Hangul"),
    c(0xCCF7, None, "HANGUL SYLLABLE CYELB", 0x31, "Hangul"),
    c(0xCCF8, None, "HANGUL SYLLABLE CYELS", 0x31, "Hangul"),
    c(0xCCF9, None, "HANGUL SYLLABLE CYELT", 0x31, "Hangul"),
    c(0xCCFA, None, "HANGUL SYLLABLE CYELP", 0x31, "Hangul"),
    c(0xCCFB, None, "HANGUL SYLLABLE CYELH", 0x31, "Hangul"),
    c(0xCCFC, None, "HANGUL SYLLABLE CYEM", 0x31, "Hangul"),
    c(0xCCFD, None, "HANGUL SYLLABLE CYEB", 0x31, "Hangul"),
    c(0xCCFE, None, "HANGUL SYLLABLE CYEBS", 0x31, "Hangul"),
    c(0xCCFF, None, "HANGUL SYLLABLE CYES", 0x31, "Hangul"),
    c(0xCD00, None, "HANGUL SYLLABLE CYESS", 0x31, "Hangul"),
    c(0xCD01, None, "HANGUL SYLLABLE CYENG", 0x31, "Hangul"),
    c(0xCD02, None, "HANGUL SYLLABLE CYEJ", 0x31, "Hangul"),
    c(0xCD03, None, "HANGUL SYLLABLE CYEC", 0x31, "Hangul"),
    c(0xCD04, None, "HANGUL SYLLABLE CYEK", 0x31, "Hangul"),
    c(0xCD05, None, "HANGUL SYLLABLE CYET", 0x31, "Hangul"),
    c(0xCD06, None, "HANGUL SYLLABLE CYEP", 0x31, "Hangul"),
    c(0xCD07, None, "HANGUL SYLLABLE CYEH", 0x31, "Hangul"),
    c(0xCD08, None, "HANGUL SYLLABLE CO", 0x31, "Hangul"),
    c(0xCD09, None, "HANGUL SYLLABLE COG", 0x31, "Hangul"),
    c(0xCD0A, None, "HANGUL SYLLABLE COGG", 0x31, "Hangul"),
    c(0xCD0B, None, "HANGUL SYLLABLE COGS", 0x31, "Hangul"),
    c(0xCD0C, None, "HANGUL SYLLABLE CON", 0x31, "Hangul"),
    c(0xCD0D, None, "HANGUL SYLLABLE CONJ", 0x31, "Hangul"),
    c(0xCD0E, None, "HANGUL SYLLABLE CONH", 0x31, "Hangul"),
    c(0xCD0F, None, "HANGUL SYLLABLE COD", 0x31, "Hangul"),
    c(0xCD10, None, "HANGUL SYLLABLE COL", 0x31, "Hangul"),
    c(0xCD11, None, "HANGUL SYLLABLE COLG", 0x31, "Hangul"),
    c(0xCD12, None, "HANGUL SYLLABLE COLM", 0x31, "Hangul"),
    c(0xCD13, None, "HANGUL SYLLABLE COLB", 0x31, "Hangul"),
    c(0xCD14, None, "HANGUL SYLLABLE COLS", 0x31, "Hangul"),
    c(0xCD15, None, "HANGUL SYLLABLE COLT", 0x31, "Hangul"),
    c(0xCD16, None, "HANGUL SYLLABLE COLP", 0x31, "Hangul"),
    c(0xCD17, None, "HANGUL SYLLABLE COLH", 0x31, "Hangul"),
    c(0xCD18, None, "HANGUL SYLLABLE COM", 0x31, "Hangul"),
    c(0xCD19, None, "HANGUL SYLLABLE COB", 0x31, "Hangul"),
    c(0xCD1A, None, "HANGUL SYLLABLE COBS", 0x31, "Hangul"),
    c(0xCD1B, None, "HANGUL SYLLABLE COS", 0x31, "Hangul"),
    c(0xCD1C, None, "HANGUL SYLLABLE COSS", 0x31, "Hangul"),
    c(0xCD1D, None, "HANGUL SYLLABLE CONG", 0x31, "Hangul"),
    c(0xCD1E, None, "HANGUL SYLLABLE COJ", 0x31, "Hangul"),
    c(0xCD1F, None, "HANGUL SYLLABLE COC", 0x31, "Hangul"),
    c(0xCD20, None, "HANGUL SYLLABLE COK", 0x31, "Hangul"),
    c(0xCD21, None, "HANGUL SYLLABLE COT", 0x31, "Hangul"),
    c(0xCD22, None, "HANGUL SYLLABLE COP", 0x31, "Hangul"),
    c(0xCD23, None, "HANGUL SYLLABLE COH", 0x31, "Hangul"),
    c(0xCD24, None, "HANGUL SYLLABLE CWA", 0x31, "Hangul"),
    c(0xCD25, None, "HANGUL SYLLABLE CWAG", 0x31, "Hangul"),
    c(0xCD26, None, "HANGUL SYLLABLE CWAGG", 0x31, "Hangul"),
    c(0xCD27, None, "HANGUL SYLLABLE CWAGS", 0x31, "Hangul"),
    c(0xCD28, None, "HANGUL SYLLABLE CWAN", 0x31, "Hangul"),
    c(0xCD29, None, "HANGUL SYLLABLE CWANJ", 0x31, "Hangul"),
    c(0xCD2A, None, "HANGUL SYLLABLE CWANH", 0x31, "Hangul"),
    c(0xCD2B, None, "HANGUL SYLLABLE CWAD", 0x31, "Hangul"),
    c(0xCD2C, None, "HANGUL SYLLABLE CWAL", 0x31, "Hangul"),
    c(0xCD2D, None, "HANGUL SYLLABLE CWALG", 0x31, "Hangul"),
    c(0xCD2E, None, "HANGUL SYLLABLE CWALM", 0x31, "Hangul"),
    c(0xCD2F, None, "HANGUL SYLLABLE CWALB", 0x31, "Hangul"),
    c(0xCD30, None, "HANGUL SYLLABLE CWALS", 0x31, "Hangul"),
    c(0xCD31, None, "HANGUL SYLLABLE CWALT", 0x31, "Hangul"),
    c(0xCD32, None, "HANGUL SYLLABLE CWALP", 0x31, "Hangul"),
    c(0xCD33, None, "HANGUL SYLLABLE CWALH", 0x31, "Hangul"),
    c(0xCD34, None, "HANGUL SYLLABLE CWAM", 0x31, "Hangul"),
    c(0xCD35, None, "HANGUL SYLLABLE CWAB", 0x31, "Hangul"),
    c(0xCD36, None, "HANGUL SYLLABLE CWABS", 0x31, "Hangul"),
    c(0xCD37, None, "HANGUL SYLLABLE CWAS", 0x31, "Hangul"),
    c(0xCD38, None, "HANGUL SYLLABLE CWASS", 0x31, "Hangul"),
    c(0xCD39, None, "HANGUL SYLLABLE CWANG", 0x31, "Hangul"),
    c(0xCD3A, None, "HANGUL SYLLABLE CWAJ", 0x31, "Hangul"),
    c(0xCD3B, None, "HANGUL SYLLABLE CWAC", 0x31, "Hangul"),
    c(0xCD3C, None, "HANGUL SYLLABLE CWAK", 0x31, "Hangul"),
    c(0xCD3D, None, "HANGUL SYLLABLE CWAT", 0x31, "Hangul"),
    c(0xCD3E, None, "HANGUL SYLLABLE CWAP", 0x31, "Hangul"),
    c(0xCD3F, None, "HANGUL SYLLABLE CWAH", 0x31, "Hangul"),
    c(0xCD40, None, "HANGUL SYLLABLE CWAE", 0x31, "Hangul"),
    c(0xCD41, None, "HANGUL SYLLABLE CWAEG", 0x31, "Hangul"),
    c(0xCD42, None, "HANGUL SYLLABLE CWAEGG", 0x31, "Hangul"),
    c(0xCD43, None, "HANGUL SYLLABLE CWAEGS", 0x31, "Hangul"),
    c(0xCD44, None, "HANGUL SYLLABLE CWAEN", 0x31, "Hangul"),
    c(0xCD45, None, "HANGUL SYLLABLE CWAENJ", 0x31, "Hangul"),
    c(0xCD46, None, "HANGUL SYLLABLE CWAENH", 0x31, "Hangul"),
    c(0xCD47, None, "HANGUL SYLLABLE CWAED", 0x31, "Hangul"),
    c(0xCD48, None, "HANGUL SYLLABLE CWAEL", 0x31, "Hangul"),
    c(0xCD49, None, "HANGUL SYLLABLE CWAELG", 0x31, "Hangul"),
    c(0xCD4A, None, "HANGUL SYLLABLE CWAELM", 0x31, "Hangul"),
    c(0xCD4B, None, "HANGUL SYLLABLE CWAELB", 0x31, "Hangul"),
    c(0xCD4C, None, "HANGUL SYLLABLE CWAELS", 0x31, "Hangul"),
    c(0xCD4D, None, "HANGUL SYLLABLE CWAELT", 0x31, "Hangul"),
    c(0xCD4E, None, "HANGUL SYLLABLE CWAELP", 0x31, "Hangul"),
    c(0xCD4F, None, "HANGUL SYLLABLE CWAELH", 0x31, "Hangul"),
    c(0xCD50, None, "HANGUL SYLLABLE CWAEM", 0x31, "Hangul"),
    c(0xCD51, None, "HANGUL SYLLABLE CWAEB", 0x31, "Hangul"),
    c(0xCD52, None, "HANGUL SYLLABLE CWAEBS", 0x31, "Hangul"),
    c(0xCD53, None, "HANGUL SYLLABLE CWAES", 0x31, "Hangul"),
    c(0xCD54, None, "HANGUL SYLLABLE CWAESS", 0x31, "Hangul"),
    c(0xCD55, None, "HANGUL SYLLABLE CWAENG", 0x31, "Hangul"),
    c(0xCD56, None, "HANGUL SYLLABLE CWAEJ", 0x31, "Hangul"),
    c(0xCD57, None, "HANGUL SYLLABLE CWAEC", 0x31, "Hangul"),
    c(0xCD58, None, "HANGUL SYLLABLE CWAEK", 0x31, "Hangul"),
    c(0xCD59, None, "HANGUL SYLLABLE CWAET", 0x31, "Hangul"),
    c(0xCD5A, None, "HANGUL SYLLABLE CWAEP", 0x31, "Hangul"),
    c(0xCD5B, None, "HANGUL SYLLABLE CWAEH", 0x31, "Hangul"),
    c(0xCD5C, None, "HANGUL SYLLABLE COE", 0x31, "Hangul"),
    c(0xCD5D, None, "HANGUL SYLLABLE COEG", 0x31, "Hangul"),
    c(0xCD5E, None, "HANGUL SYLLABLE COEGG", 0x31, "Hangul"),
    c(0xCD5F, None, "HANGUL SYLLABLE COEGS", 0x31, "Hangul"),
    c(0xCD60, None, "HANGUL SYLLABLE COEN", 0x31, "Hangul"),
    c(0xCD61, None, "HANGUL SYLLABLE COENJ", 0x31, "Hangul"),
    c(0xCD62, None, "HANGUL SYLLABLE COENH", 0x31, "Hangul"),
    c(0xCD63, None, "HANGUL SYLLABLE COED", 0x31, "Hangul"),
    c(0xCD64, None, "HANGUL SYLLABLE COEL", 0x31, "Hangul"),
    c(0xCD65, None, "HANGUL SYLLABLE COELG", 0x31, "Hangul"),
    c(0xCD66, None, "HANGUL SYLLABLE COELM", 0x31, "Hangul"),
    c(0xCD67, None, "HANGUL SYLLABLE COELB", 0x31, "Hangul"),
    c(0xCD68, None, "HANGUL SYLLABLE COELS", 0x31, "Hangul"),
    c(0xCD69, None, "HANGUL SYLLABLE COELT", 0x31, "Hangul"),
    c(0xCD6A, None, "HANGUL SYLLABLE COELP", 0x31, "Hangul"),
    c(0xCD6B, None, "HANGUL SYLLABLE COELH", 0x31, "Hangul"),
    c(0xCD6C, None, "HANGUL SYLLABLE COEM", 0x31, "Hangul"),
    c(0xCD6D, None, "HANGUL SYLLABLE COEB", 0x31, "Hangul"),
    c(0xCD6E, None, "HANGUL SYLLABLE COEBS", 0x31, "Hangul"),
    c(0xCD6F, None, "HANGUL SYLLABLE COES", 0x31, "Hangul"),
    c(0xCD70, None, "HANGUL SYLLABLE COESS", 0x31, "Hangul"),
    c(0xCD71, None, "HANGUL SYLLABLE COENG", 0x31, "Hangul"),
    c(0xCD72, None, "HANGUL SYLLABLE COEJ", 0x31, "Hangul"),
    c(0xCD73, None, "HANGUL SYLLABLE COEC", 0x31, "Hangul"),
    c(0xCD74, None, "HANGUL SYLLABLE COEK", 0x31, "Hangul"),
    c(0xCD75, None, "HANGUL SYLLABLE COET", 0x31, "Hangul"),
    c(0xCD76, None, "HANGUL SYLLABLE COEP", 0x31, "Hangul"),
    c(0xCD77, None, "HANGUL SYLLABLE COEH", 0x31, "Hangul"),
    c(0xCD78, None, "HANGUL SYLLABLE CYO", 0x31, "Hangul"),
    c(0xCD79, None, "HANGUL SYLLABLE CYOG", 0x31, "Hangul"),
    c(0xCD7A, None, "HANGUL SYLLABLE CYOGG", 0x31, "Hangul"),
    c(0xCD7B, None, "HANGUL SYLLABLE CYOGS", 0x31, "Hangul"),
    c(0xCD7C, None, "HANGUL SYLLABLE CYON", 0x31, "Hangul"),
    c(0xCD7D, None, "HANGUL SYLLABLE CYONJ", 0x31, "Hangul"),
    c(0xCD7E, None, "HANGUL SYLLABLE CYONH", 0x31, "Hangul"),
    c(0xCD7F, None, "HANGUL SYLLABLE CYOD", 0x31, "Hangul"),
    c(0xCD80, None, "HANGUL SYLLABLE CYOL", 0x31, "Hangul"),
    c(0xCD81, None, "HANGUL SYLLABLE CYOLG", 0x31, "Hangul"),
    c(0xCD82, None, "HANGUL SYLLABLE CYOLM", 0x31, "Hangul"),
    c(0xCD83, None, "HANGUL SYLLABLE CYOLB", 0x31, "Hangul"),
    c(0xCD84, None, "HANGUL SYLLABLE CYOLS", 0x31, "Hangul"),
    c(0xCD85, None, "HANGUL SYLLABLE CYOLT", 0x31, "Hangul"),
    c(0xCD86, None, "HANGUL SYLLABLE CYOLP", 0x31, "Hangul"),
    c(0xCD87, None, "HANGUL SYLLABLE CYOLH", 0x31, "Hangul"),
    c(0xCD88, None, "HANGUL SYLLABLE CYOM", 0x31, "Hangul"),
    c(0xCD89, None, "HANGUL SYLLABLE CYOB", 0x31, "Hangul"),
    c(0xCD8A, None, "HANGUL SYLLABLE CYOBS", 0x31, "Hangul"),
    c(0xCD8B, None, "HANGUL SYLLABLE CYOS", 0x31, "Hangul"),
    c(0xCD8C, None, "HANGUL SYLLABLE CYOSS", 0x31, "Hangul"),
    c(0xCD8D, None, "HANGUL SYLLABLE CYONG", 0x31, "Hangul"),
    c(0xCD8E, None, "HANGUL SYLLABLE CYOJ", 0x31, "Hangul"),
    c(0xCD8F, None, "HANGUL SYLLABLE CYOC", 0x31, "Hangul"),
    c(0xCD90, None, "HANGUL SYLLABLE CYOK", 0x31, "Hangul"),
    c(0xCD91, None, "HANGUL SYLLABLE CYOT", 0x31, "Hangul"),
    c(0xCD92, None, "HANGUL SYLLABLE CYOP", 0x31, "Hangul"),
    c(0xCD93, None, "HANGUL SYLLABLE CYOH", 0x31, "Hangul"),
    c(0xCD94, None, "HANGUL SYLLABLE CU", 0x31, "Hangul"),
    c(0xCD95, None, "HANGUL SYLLABLE CUG", 0x31, "Hangul"),
    c(0xCD96, None, "HANGUL SYLLABLE CUGG", 0x31, "Hangul"),
    c(0xCD97, None, "HANGUL SYLLABLE CUGS", 0x31, "Hangul"),
    c(0xCD98, None, "HANGUL SYLLABLE CUN", 0x31, "Hangul"),
    c(0xCD99, None, "HANGUL SYLLABLE CUNJ", 0x31, "Hangul"),
    c(0xCD9A, None, "HANGUL SYLLABLE CUNH", 0x31, "Hangul"),
    c(0xCD9B, None, "HANGUL SYLLABLE CUD", 0x31, "Hangul"),
    c(0xCD9C, None, "HANGUL SYLLABLE CUL", 0x31, "Hangul"),
    c(0xCD9D, None, "HANGUL SYLLABLE CULG", 0x31, "Hangul"),
    c(0xCD9E, None, "HANGUL SYLLABLE CULM", 0x31, "Hangul"),
    c(0xCD9F, None, "HANGUL SYLLABLE CULB", 0x31, "Hangul"),
    c(0xCDA0, None, "HANGUL SYLLABLE CULS", 0x31, "Hangul"),
    c(0xCDA1, None, "HANGUL SYLLABLE CULT", 0x31, "Hangul"),
    c(0xCDA2, None, "HANGUL SYLLABLE CULP", 0x31, "Hangul"),
    c(0xCDA3, None, "HANGUL SYLLABLE CULH", 0x31, "Hangul"),
    c(0xCDA4, None, "HANGUL SYLLABLE CUM", 0x31, "Hangul"),
    c(0xCDA5, None, "HANGUL SYLLABLE CUB", 0x31, "Hangul"),
    c(0xCDA6, None, "HANGUL SYLLABLE CUBS", 0x31, "Hangul"),
    c(0xCDA7, None, "HANGUL SYLLABLE CUS", 0x31, "Hangul"),
    c(0xCDA8, None, "HANGUL SYLLABLE CUSS", 0x31, "Hangul"),
    c(0xCDA9, None, "HANGUL SYLLABLE CUNG", 0x31, "Hangul"),
    c(0xCDAA, None, "HANGUL SYLLABLE CUJ", 0x31, "Hangul"),
    c(0xCDAB, None, "HANGUL SYLLABLE CUC", 0x31, "Hangul"),
    c(0xCDAC, None, "HANGUL SYLLABLE CUK", 0x31, "Hangul"),
    c(0xCDAD, None, "HANGUL SYLLABLE CUT", 0x31, "Hangul"),
    c(0xCDAE, None, "HANGUL SYLLABLE CUP", 0x31, "Hangul"),
    c(0xCDAF, None, "HANGUL SYLLABLE CUH", 0x31, "Hangul"),
    c(0xCDB0, None, "HANGUL SYLLABLE CWEO", 0x31, "Hangul"),
    c(0xCDB1, None, "HANGUL SYLLABLE CWEOG", 0x31, "Hangul"),
    c(0xCDB2, None, "HANGUL SYLLABLE CWEOGG", 0x31, "Hangul"),
    c(0xCDB3, None, "HANGUL SYLLABLE CWEOGS", 0x31, "Hangul"),
    c(0xCDB4, None, "HANGUL SYLLABLE CWEON", 0x31, "Hangul"),
    c(0xCDB5, None, "HANGUL SYLLABLE CWEONJ", 0x31, "Hangul"),
    c(0xCDB6, None, "HANGUL SYLLABLE CWEONH", 0x31, "Hangul"),
    c(0xCDB7, None, "HANGUL SYLLABLE CWEOD", 0x31, "Hangul"),
    c(0xCDB8, None, "HANGUL SYLLABLE CWEOL", 0x31, "Hangul"),
    c(0xCDB9, None, "HANGUL SYLLABLE CWEOLG", 0x31, "Hangul"),
    c(0xCDBA, None, "HANGUL SYLLABLE CWEOLM", 0x31, "Hangul"),
    c(0xCDBB, None, "HANGUL SYLLABLE CWEOLB", 0x31, "Hangul"),
    c(0xCDBC, None, "HANGUL SYLLABLE CWEOLS", 0x31, "Hangul"),
    c(0xCDBD, None, "HANGUL SYLLABLE CWEOLT", 0x31, "Hangul"),
    c(0xCDBE, None, "HANGUL SYLLABLE CWEOLP", 0x31, "Hangul"),
    c(0xCDBF, None, "HANGUL SYLLABLE CWEOLH", 0x31, "Hangul"),
    c(0xCDC0, None, "HANGUL SYLLABLE CWEOM", 0x31, "Hangul"),
    c(0xCDC1, None, "HANGUL SYLLABLE CWEOB", 0x31, "Hangul"),
    c(0xCDC2, None, "HANGUL SYLLABLE CWEOBS", 0x31, "Hangul"),
    c(0xCDC3, None, "HANGUL SYLLABLE CWEOS", 0x31, "Hangul"),
    c(0xCDC4, None, "HANGUL SYLLABLE CWEOSS", 0x31, "Hangul"),
    c(0xCDC5, None, "HANGUL SYLLABLE CWEONG", 0x31, "Hangul"),
    c(0xCDC6, None, "HANGUL SYLLABLE CWEOJ", 0x31, "Hangul"),
    c(0xCDC7, None, "HANGUL SYLLABLE CWEOC", 0x31, "Hangul"),
    c(0xCDC8, None, "HANGUL SYLLABLE CWEOK", 0x31, "Hangul"),
    c(0xCDC9, None, "HANGUL SYLLABLE CWEOT", 0x31, "Hangul"),
    c(0xCDCA, None, "HANGUL SYLLABLE CWEOP", 0x31, "Hangul"),
    c(0xCDCB, None, "HANGUL SYLLABLE CWEOH", 0x31, "Hangul"),
    c(0xCDCC, None, "HANGUL SYLLABLE CWE", 0x31, "Hangul"),
    c(0xCDCD, None, "HANGUL SYLLABLE CWEG", 0x31, "Hangul"),
    c(0xCDCE, None, "HANGUL SYLLABLE CWEGG", 0x31, "Hangul"),
    c(0xCDCF, None, "HANGUL SYLLABLE CWEGS", 0x31, "Hangul"),
    c(0xCDD0, None, "HANGUL SYLLABLE CWEN", 0x31, "Hangul"),
    c(0xCDD1, None, "HANGUL SYLLABLE CWENJ", 0x31, "Hangul"),
    c(0xCDD2, None, "HANGUL SYLLABLE CWENH", 0x31, "Hangul"),
    c(0xCDD3, None, "HANGUL SYLLABLE CWED", 0x31, "Hangul"),
    c(0xCDD4, None, "HANGUL SYLLABLE CWEL", 0x31, "Hangul"),
    c(0xCDD5, None, "HANGUL SYLLABLE CWELG", 0x31, "Hangul"),
    c(0xCDD6, None, "HANGUL SYLLABLE CWELM", 0x31, "Hangul"),
    c(0xCDD7, None, "HANGUL SYLLABLE CWELB", 0x31, "Hangul"),
    c(0xCDD8, None, "HANGUL SYLLABLE CWELS", 0x31, "Hangul"),
    c(0xCDD9, None, "HANGUL SYLLABLE CWELT", 0x31, "Hangul"),
    c(0xCDDA, None, "HANGUL SYLLABLE CWELP", 0x31, "Hangul"),
    c(0xCDDB, None, "HANGUL SYLLABLE CWELH", 0x31, "Hangul"),
    c(0xCDDC, None, "HANGUL SYLLABLE CWEM", 0x31, "Hangul"),
    c(0xCDDD, None, "HANGUL SYLLABLE CWEB", 0x31, "Hangul"),
    c(0xCDDE, None, "HANGUL SYLLABLE CWEBS", 0x31, "Hangul"),
    c(0xCDDF, None, "HANGUL SYLLABLE CWES", 0x31, "Hangul"),
    c(0xCDE0, None, "HANGUL SYLLABLE CWESS", 0x31, "Hangul"),
    c(0xCDE1, None, "HANGUL SYLLABLE CWENG", 0x31, "Hangul"),
    c(0xCDE2, None, "HANGUL SYLLABLE CWEJ", 0x31, "Hangul"),
    c(0xCDE3, None, "HANGUL SYLLABLE CWEC", 0x31, "Hangul"),
    c(0xCDE4, None, "HANGUL SYLLABLE CWEK", 0x31, "Hangul"),
    c(0xCDE5, None, "HANGUL SYLLABLE CWET", 0x31, "Hangul"),
    c(0xCDE6, None, "HANGUL SYLLABLE CWEP", 0x31, "Hangul"),
    c(0xCDE7, None, "HANGUL SYLLABLE CWEH", 0x31, "Hangul"),
    c(0xCDE8, None, "HANGUL SYLLABLE CWI", 0x31, "Hangul"),
    c(0xCDE9, None, "HANGUL SYLLABLE CWIG", 0x31, "Hangul"),
    c(0xCDEA, None, "HANGUL SYLLABLE CWIGG", 0x31, "Hangul"),
    c(0xCDEB, None, "HANGUL SYLLABLE CWIGS", 0x31, "Hangul"),
    c(0xCDEC, None, "HANGUL SYLLABLE CWIN", 0x31, "Hangul"),
    c(0xCDED, None, "HANGUL SYLLABLE CWINJ", 0x31, "Hangul"),
    c(0xCDEE, None, "HANGUL SYLLABLE CWINH", 0x31, "Hangul"),
    c(0xCDEF, None, "HANGUL SYLLABLE CWID", 0x31, "Hangul"),
    c(0xCDF0, None, "HANGUL SYLLABLE CWIL", 0x31, "Hangul"),
    c(0xCDF1, None, "HANGUL SYLLABLE CWILG", 0x31, "Hangul"),
    c(0xCDF2, None, "HANGUL SYLLABLE CWILM", 0x31, "Hangul"),
    c(0xCDF3, None, "HANGUL SYLLABLE CWILB", 0x31, "Hangul"),
    c(0xCDF4, None, "HANGUL SYLLABLE CWILS", 0x31, "Hangul"),
    c(0xCDF5, None, "HANGUL SYLLABLE CWILT", 0x31, "Hangul"),
    c(0xCDF6, None, "HANGUL SYLLABLE CWILP", 0x31, "Hangul"),
    c(0xCDF7, None, "HANGUL SYLLABLE CWILH", 0x31, "Hangul"),
    c(0xCDF8, None, "HANGUL SYLLABLE CWIM", 0x31, "Hangul"),
    c(0xCDF9, None, "HANGUL SYLLABLE CWIB", 0x31, "Hangul"),
    c(0xCDFA, None, "HANGUL SYLLABLE CWIBS", 0x31, "Hangul"),
    c(0xCDFB, None, "HANGUL SYLLABLE CWIS", 0x31, "Hangul"),
    c(0xCDFC, None, "HANGUL SYLLABLE CWISS", 0x31, "Hangul"),
    c(0xCDFD, None, "HANGUL SYLLABLE CWING", 0x31, "Hangul"),
    c(0xCDFE, None, "HANGUL SYLLABLE CWIJ", 0x31, "Hangul"),
    c(0xCDFF, None, "HANGUL SYLLABLE CWIC", 0x31, "Hangul"),
    c(0xCE00, None, "HANGUL SYLLABLE CWIK", 0x31, "Hangul"),
    c(0xCE01, None, "HANGUL SYLLABLE CWIT", 0x31, "Hangul"),
    c(0xCE02, None, "HANGUL SYLLABLE CWIP", 0x31, "Hangul"),
    c(0xCE03, None, "HANGUL SYLLABLE CWIH", 0x31, "Hangul"),
    c(0xCE04, None, "HANGUL SYLLABLE CYU", 0x31, "Hangul"),
    c(0xCE05, None, "HANGUL SYLLABLE CYUG", 0x31, "Hangul"),
    c(0xCE06, None, "HANGUL SYLLABLE CYUGG", 0x31, "Hangul"),
    c(0xCE07, None, "HANGUL SYLLABLE CYUGS", 0x31, "Hangul"),
    c(0xCE08, None, "HANGUL SYLLABLE CYUN", 0x31, "Hangul"),
    c(0xCE09, None, "HANGUL SYLLABLE CYUNJ", 0x31, "Hangul"),
    c(0xCE0A, None, "HANGUL SYLLABLE CYUNH", 0x31, "Hangul"),
    c(0xCE0B, None, "HANGUL SYLLABLE CYUD", 0x31, "Hangul"),
    c(0xCE0C, None, "HANGUL SYLLABLE CYUL", 0x31, "Hangul"),
    c(0xCE0D, None, "HANGUL SYLLABLE CYULG", 0x31, "Hangul"),
    c(0xCE0E, None, "HANGUL SYLLABLE CYULM", 0x31, "Hangul"),
    c(0xCE0F, None, "HANGUL SYLLABLE CYULB", 0x31, "Hangul"),
    c(0xCE10, None, "HANGUL SYLLABLE CYULS", 0x31, "Hangul"),
    c(0xCE11, None, "HANGUL SYLLABLE CYULT", 0x31, "Hangul"),
    c(0xCE12, None, "HANGUL SYLLABLE CYULP", 0x31, "Hangul"),
    c(0xCE13, None, "HANGUL SYLLABLE CYULH", 0x31, "Hangul"),
    c(0xCE14, None, "HANGUL SYLLABLE CYUM", 0x31, "Hangul"),
    c(0xCE15, None, "HANGUL SYLLABLE CYUB", 0x31, "Hangul"),
    c(0xCE16, None, "HANGUL SYLLABLE CYUBS", 0x31, "Hangul"),
    c(0xCE17, None, "HANGUL SYLLABLE CYUS", 0x31, "Hangul"),
    c(0xCE18, None, "HANGUL SYLLABLE CYUSS", 0x31, "Hangul"),
    c(0xCE19, None, "HANGUL SYLLABLE CYUNG", 0x31, "Hangul"),
    c(0xCE1A, None, "HANGUL SYLLABLE CYUJ", 0x31, "Hangul"),
    c(0xCE1B, None, "HANGUL SYLLABLE CYUC", 0x31, "Hangul"),
    c(0xCE1C, None, "HANGUL SYLLABLE CYUK", 0x31, "Hangul"),
    c(0xCE1D, None, "HANGUL SYLLABLE CYUT", 0x31, "Hangul"),
    c(0xCE1E, None, "HANGUL SYLLABLE CYUP", 0x31, "Hangul"),
    c(0xCE1F, None, "HANGUL SYLLABLE CYUH", 0x31, "Hangul"),
    c(0xCE20, None, "HANGUL SYLLABLE CEU", 0x31, "Hangul"),
    c(0xCE21, None, "HANGUL SYLLABLE CEUG", 0x31, "Hangul"),
    c(0xCE22, None, "HANGUL SYLLABLE CEUGG", 0x31, "Hangul"),
    c(0xCE23, None, "HANGUL SYLLABLE CEUGS", 0x31, "Hangul"),
    c(0xCE24, None, "HANGUL SYLLABLE CEUN", 0x31, "Hangul"),
    c(0xCE25, None, "HANGUL SYLLABLE CEUNJ", 0x31, "Hangul"),
    c(0xCE26, None, "HANGUL SYLLABLE CEUNH", 0x31, "Hangul"),
    c(0xCE27, None, "HANGUL SYLLABLE CEUD", 0x31, "Hangul"),
    c(0xCE28, None, "HANGUL SYLLABLE CEUL", 0x31, "Hangul"),
    c(0xCE29, None, "HANGUL SYLLABLE CEULG", 0x31, "Hangul"),
    c(0xCE2A, None, "HANGUL SYLLABLE CEULM", 0x31, "Hangul"),
    c(0xCE2B, None, "HANGUL SYLLABLE CEULB", 0x31, "Hangul"),
    c(0xCE2C, None, "HANGUL SYLLABLE CEULS", 0x31, "Hangul"),
    c(0xCE2D, None, "HANGUL SYLLABLE CEULT", 0x31, "Hangul"),
    c(0xCE2E, None, "HANGUL SYLLABLE CEULP", 0x31, "Hangul"),
    c(0xCE2F, None, "HANGUL SYLLABLE CEULH", 0x31, "Hangul"),
    c(0xCE30, None, "HANGUL SYLLABLE CEUM", 0x31, "Hangul"),
    c(0xCE31, None, "HANGUL SYLLABLE CEUB", 0x31, "Hangul"),
    c(0xCE32, None, "HANGUL SYLLABLE CEUBS", 0x31, "Hangul"),
    c(0xCE33, None, "HANGUL SYLLABLE CEUS", 0x31, "Hangul"),
    c(0xCE34, None, "HANGUL SYLLABLE CEUSS", 0x31, "Hangul"),
    c(0xCE35, None, "HANGUL SYLLABLE CEUNG", 0x31, "Hangul"),
    c(0xCE36, None, "HANGUL SYLLABLE CEUJ", 0x31, "Hangul"),
    c(0xCE37, None, "HANGUL SYLLABLE CEUC", 0x31, "Hangul"),
    c(0xCE38, None, "HANGUL SYLLABLE CEUK", 0x31, "Hangul"),
    c(0xCE39, None, "HANGUL SYLLABLE CEUT", 0x31, "Hangul"),
    c(0xCE3A, None, "HANGUL SYLLABLE CEUP", 0x31, "Hangul"),
    c(0xCE3B, None, "HANGUL SYLLABLE CEUH", 0x31, "Hangul"),
    c(0xCE3C, None, "HANGUL SYLLABLE CYI", 0x31, "Hangul"),
    c(0xCE3D, None, "HANGUL SYLLABLE CYIG", 0x31, "Hangul"),
    c(0xCE3E, None, "HANGUL SYLLABLE CYIGG", 0x31, "Hangul"),
    c(0xCE3F, None, "HANGUL SYLLABLE CYIGS", 0x31, "Hangul"),
    c(0xCE40, None, "HANGUL SYLLABLE CYIN", 0x31, "Hangul"),
    c(0xCE41, None, "HANGUL SYLLABLE CYINJ", 0x31, "Hangul"),
    c(0xCE42, None, "HANGUL SYLLABLE CYINH", 0x31, "Hangul"),
    c(0xCE43, None, "HANGUL SYLLABLE CYID", 0x31, "Hangul"),
    c(0xCE44, None, "HANGUL SYLLABLE CYIL", 0x31, "Hangul"),
    c(0xCE45, None, "HANGUL SYLLABLE CYILG", 0x31, "Hangul"),
    c(0xCE46, None, "HANGUL SYLLABLE CYILM", 0x31, "Hangul"),
    c(0xCE47, None, "HANGUL SYLLABLE CYILB", 0x31, "Hangul"),
    c(0xCE48, None, "HANGUL SYLLABLE CYILS", 0x31, "Hangul"),
    c(0xCE49, None, "HANGUL SYLLABLE CYILT", 0x31, "Hangul"),
    c(0xCE4A, None, "HANGUL SYLLABLE CYILP", 0x31, "Hangul"),
    c(0xCE4B, None, "HANGUL SYLLABLE CYILH", 0x31, "Hangul"),
    c(0xCE4C, None, "HANGUL SYLLABLE CYIM", 0x31, "Hangul"),
    c(0xCE4D, None, "HANGUL SYLLABLE CYIB", 0x31, "Hangul"),
    c(0xCE4E, None, "HANGUL SYLLABLE CYIBS", 0x31, "Hangul"),
    c(0xCE4F, None, "HANGUL SYLLABLE CYIS", 0x31, "Hangul"),
    c(0xCE50, None, "HANGUL SYLLABLE CYISS", 0x31, "Hangul"),
    c(0xCE51, None, "HANGUL SYLLABLE CYING", 0x31, "Hangul"),
    c(0xCE52, None, "HANGUL SYLLABLE CYIJ", 0x31, "Hangul"),
    c(0xCE53, None, "HANGUL SYLLABLE CYIC", 0x31, "Hangul"),
    c(0xCE54, None, "HANGUL SYLLABLE CYIK", 0x31, "Hangul"),
    c(0xCE55, None, "HANGUL SYLLABLE CYIT", 0x31, "Hangul"),
    c(0xCE56, None, "HANGUL SYLLABLE CYIP", 0x31, "Hangul"),
    c(0xCE57, None, "HANGUL SYLLABLE CYIH", 0x31, "Hangul"),
    c(0xCE58, None, "HANGUL SYLLABLE CI", 0x31, "Hangul"),
    c(0xCE59, None, "HANGUL SYLLABLE CIG", 0x31, "Hangul"),
    c(0xCE5A, None, "HANGUL SYLLABLE CIGG", 0x31, "Hangul"),
    c(0xCE5B, None, "HANGUL SYLLABLE CIGS", 0x31, "Hangul"),
    c(0xCE5C, None, "HANGUL SYLLABLE CIN", 0x31, "Hangul"),
    c(0xCE5D, None, "HANGUL SYLLABLE CINJ", 0x31, "Hangul"),
    c(0xCE5E, None, "HANGUL SYLLABLE CINH", 0x31, "Hangul"),
    c(0xCE5F, None, "HANGUL SYLLABLE CID", 0x31, "Hangul"),
    c(0xCE60, None, "HANGUL SYLLABLE CIL", 0x31, "Hangul"),
    c(0xCE61, None, "HANGUL SYLLABLE CILG", 0x31, "Hangul"),
    c(0xCE62, None, "HANGUL SYLLABLE CILM", 0x31, "Hangul"),
    c(0xCE63, None, "HANGUL SYLLABLE CILB", 0x31, "Hangul"),
    c(0xCE64, None, "HANGUL SYLLABLE CILS", 0x31, "Hangul"),
    c(0xCE65, None, "HANGUL SYLLABLE CILT", 0x31, "Hangul"),
    c(0xCE66, None, "HANGUL SYLLABLE CILP", 0x31, "Hangul"),
    c(0xCE67, None, "HANGUL SYLLABLE CILH", 0x31, "Hangul"),
    c(0xCE68, None, "HANGUL SYLLABLE CIM", 0x31, "Hangul"),
    c(0xCE69, None, "HANGUL SYLLABLE CIB", 0x31, "Hangul"),
    c(0xCE6A, None, "HANGUL SYLLABLE CIBS", 0x31, "Hangul"),
    c(0xCE6B, None, "HANGUL SYLLABLE CIS", 0x31, "Hangul"),
    c(0xCE6C, None, "HANGUL SYLLABLE CISS", 0x31, "Hangul"),
    c(0xCE6D, None, "HANGUL SYLLABLE CING", 0x31, "Hangul"),
    c(0xCE6E, None, "HANGUL SYLLABLE CIJ", 0x31, "Hangul"),
    c(0xCE6F, None, "HANGUL SYLLABLE CIC", 0x31, "Hangul"),
    c(0xCE70, None, "HANGUL SYLLABLE CIK", 0x31, "Hangul"),
    c(0xCE71, None, "HANGUL SYLLABLE CIT", 0x31, "Hangul"),
    c(0xCE72, None, "HANGUL SYLLABLE CIP", 0x31, "Hangul"),
    c(0xCE73, None, "HANGUL SYLLABLE CIH", 0x31, "Hangul"),
    c(0xCE74, None, "HANGUL SYLLABLE KA", 0x31, "Hangul"),
    c(0xCE75, None, "HANGUL SYLLABLE KAG", 0x31, "Hangul"),
    c(0xCE76, None, "HANGUL SYLLABLE KAGG", 0x31, "Hangul"),
    c(0xCE77, None, "HANGUL SYLLABLE KAGS", 0x31, "Hangul"),
    c(0xCE78, None, "HANGUL SYLLABLE KAN", 0x31, "Hangul"),
    c(0xCE79, None, "HANGUL SYLLABLE KANJ", 0x31, "Hangul"),
    c(0xCE7A, None, "HANGUL SYLLABLE KANH", 0x31, "Hangul"),
    c(0xCE7B, None, "HANGUL SYLLABLE KAD", 0x31, "Hangul"),
    c(0xCE7C, None, "HANGUL SYLLABLE KAL", 0x31, "Hangul"),
    c(0xCE7D, None, "HANGUL SYLLABLE KALG", 0x31, "Hangul"),
    c(0xCE7E, None, "HANGUL SYLLABLE KALM", 0x31, "Hangul"),
    c(0xCE7F, None, "HANGUL SYLLABLE KALB", 0x31, "Hangul"),
    c(0xCE80, None, "HANGUL SYLLABLE KALS", 0x31, "Hangul"),
    c(0xCE81, None, "HANGUL SYLLABLE KALT", 0x31, "Hangul"),
    c(0xCE82, None, "HANGUL SYLLABLE KALP", 0x31, "Hangul"),
    c(0xCE83, None, "HANGUL SYLLABLE KALH", 0x31, "Hangul"),
    c(0xCE84, None, "HANGUL SYLLABLE KAM", 0x31, "Hangul"),
    c(0xCE85, None, "HANGUL SYLLABLE KAB", 0x31, "Hangul"),
    c(0xCE86, None, "HANGUL SYLLABLE KABS", 0x31, "Hangul"),
    c(0xCE87, None, "HANGUL SYLLABLE KAS", 0x31, "Hangul"),
    c(0xCE88, None, "HANGUL SYLLABLE KASS", 0x31, "Hangul"),
    c(0xCE89, None, "HANGUL SYLLABLE KANG", 0x31, "Hangul"),
    c(0xCE8A, None, "HANGUL SYLLABLE KAJ", 0x31, "Hangul"),
    c(0xCE8B, None, "HANGUL SYLLABLE KAC", 0x31, "Hangul"),
    c(0xCE8C, None, "HANGUL SYLLABLE KAK", 0x31, "Hangul"),
    c(0xCE8D, None, "HANGUL SYLLABLE KAT", 0x31, "Hangul"),
    c(0xCE8E, None, "HANGUL SYLLABLE KAP", 0x31, "Hangul"),
    c(0xCE8F, None, "HANGUL SYLLABLE KAH", 0x31, "Hangul"),
    c(0xCE90, None, "HANGUL SYLLABLE KAE", 0x31, "Hangul"),
    c(0xCE91, None, "HANGUL SYLLABLE KAEG", 0x31, "Hangul"),
    c(0xCE92, None, "HANGUL SYLLABLE KAEGG", 0x31, "Hangul"),
    c(0xCE93, None, "HANGUL SYLLABLE KAEGS", 0x31, "Hangul"),
    c(0xCE94, None, "HANGUL SYLLABLE KAEN", 0x31, "Hangul"),
    c(0xCE95, None, "HANGUL SYLLABLE KAENJ", 0x31, "Hangul"),
    c(0xCE96, None, "HANGUL SYLLABLE KAENH", 0x31, "Hangul"),
    c(0xCE97, None, "HANGUL SYLLABLE KAED", 0x31, "Hangul"),
    c(0xCE98, None, "HANGUL SYLLABLE KAEL", 0x31, "Hangul"),
    c(0xCE99, None, "HANGUL SYLLABLE KAELG", 0x31, "Hangul"),
    c(0xCE9A, None, "HANGUL SYLLABLE KAELM", 0x31, "Hangul"),
    c(0xCE9B, None, "HANGUL SYLLABLE KAELB", 0x31, "Hangul"),
    c(0xCE9C, None, "HANGUL SYLLABLE KAELS", 0x31, "Hangul"),
    c(0xCE9D, None, "HANGUL SYLLABLE KAELT", 0x31, "Hangul"),
    c(0xCE9E, None, "HANGUL SYLLABLE KAELP", 0x31, "Hangul"),
    c(0xCE9F, None, "HANGUL SYLLABLE KAELH", 0x31, "Hangul"),
    c(0xCEA0, None, "HANGUL SYLLABLE KAEM", 0x31, "Hangul"),
    c(0xCEA1, None, "HANGUL SYLLABLE KAEB", 0x31, "Hangul"),
    c(0xCEA2, None, "HANGUL SYLLABLE KAEBS", 0x31, "Hangul"),
    c(0xCEA3, None, "HANGUL SYLLABLE KAES", 0x31, "Hangul"),
    c(0xCEA4, None, "HANGUL SYLLABLE KAESS", 0x31, "Hangul"),
    c(0xCEA5, None, "HANGUL SYLLABLE KAENG", 0x31, "Hangul"),
    c(0xCEA6, None, "HANGUL SYLLABLE KAEJ", 0x31, "Hangul"),
    c(0xCEA7, None, "HANGUL SYLLABLE KAEC", 0x31, "Hangul"),
    c(0xCEA8, None, "HANGUL SYLLABLE KAEK", 0x31, "Hangul"),
    c(0xCEA9, None, "HANGUL SYLLABLE KAET", 0x31, "Hangul"),
    c(0xCEAA, None, "HANGUL SYLLABLE KAEP", 0x31, "Hangul"),
    c(0xCEAB, None, "HANGUL SYLLABLE KAEH", 0x31, "Hangul"),
    c(0xCEAC, None, "HANGUL SYLLABLE KYA", 0x31, "Hangul"),
    c(0xCEAD, None, "HANGUL SYLLABLE KYAG", 0x31, "Hangul"),
    c(0xCEAE, None, "HANGUL SYLLABLE KYAGG", 0x31, "Hangul"),
    c(0xCEAF, None, "HANGUL SYLLABLE KYAGS", 0x31, "Hangul"),
    c(0xCEB0, None, "HANGUL SYLLABLE KYAN", 0x31, "Hangul"),
    c(0xCEB1, None, "HANGUL SYLLABLE KYANJ", 0x31, "Hangul"),
    c(0xCEB2, None, "HANGUL SYLLABLE KYANH", 0x31, "Hangul"),
    c(0xCEB3, None, "HANGUL SYLLABLE KYAD", 0x31, "Hangul"),
    c(0xCEB4, None, "HANGUL SYLLABLE KYAL", 0x31, "Hangul"),
    c(0xCEB5, None, "HANGUL SYLLABLE KYALG", 0x31, "Hangul"),
    c(0xCEB6, None, "HANGUL SYLLABLE KYALM", 0x31, "Hangul"),
    c(0xCEB7, None, "HANGUL SYLLABLE KYALB", 0x31, "Hangul"),
    c(0xCEB8, None, "HANGUL SYLLABLE KYALS", 0x31, "Hangul"),
    c(0xCEB9, None, "HANGUL SYLLABLE KYALT", 0x31, "Hangul"),
    c(0xCEBA, None, "HANGUL SYLLABLE KYALP", 0x31, "Hangul"),
    c(0xCEBB, None, "HANGUL SYLLABLE KYALH", 0x31, "Hangul"),
    c(0xCEBC, None, "HANGUL SYLLABLE KYAM", 0x31, "Hangul"),
    c(0xCEBD, None, "HANGUL SYLLABLE KYAB", 0x31, "Hangul"),
    c(0xCEBE, None, "HANGUL SYLLABLE KYABS", 0x31, "Hangul"),
    c(0xCEBF, None, "HANGUL SYLLABLE KYAS", 0x31, "Hangul"),
    c(0xCEC0, None, "HANGUL SYLLABLE KYASS", 0x31, "Hangul"),
    c(0xCEC1, None, "HANGUL SYLLABLE KYANG", 0x31, "Hangul"),
    c(0xCEC2, None, "HANGUL SYLLABLE KYAJ", 0x31, "Hangul"),
    c(0xCEC3, None, "HANGUL SYLLABLE KYAC", 0x31, "Hangul"),
    c(0xCEC4, None, "HANGUL SYLLABLE KYAK", 0x31, "Hangul"),
    c(0xCEC5, None, "HANGUL SYLLABLE KYAT", 0x31, "Hangul"),
    c(0xCEC6, None, "HANGUL SYLLABLE KYAP", 0x31, "Hangul"),
    c(0xCEC7, None, "HANGUL SYLLABLE KYAH", 0x31, "Hangul"),
    c(0xCEC8, None, "HANGUL SYLLABLE KYAE", 0x31, "Hangul"),
    c(0xCEC9, None, "HANGUL SYLLABLE KYAEG", 0x31, "Hangul"),
    c(0xCECA, None, "HANGUL SYLLABLE KYAEGG", 0x31, "Hangul"),
    c(0xCECB, None, "HANGUL SYLLABLE KYAEGS", 0x31, "Hangul"),
    c(0xCECC, None, "HANGUL SYLLABLE KYAEN", 0x31, "Hangul"),
    c(0xCECD, None, "HANGUL SYLLABLE KYAENJ", 0x31, "Hangul"),
    c(0xCECE, None, "HANGUL SYLLABLE KYAENH", 0x31, "Hangul"),
    c(0xCECF, None, "HANGUL SYLLABLE KYAED", 0x31, "Hangul"),
    c(0xCED0, None, "HANGUL SYLLABLE KYAEL", 0x31, "Hangul"),
    c(0xCED1, None, "HANGUL SYLLABLE KYAELG", 0x31, "Hangul"),
    c(0xCED2, None, "HANGUL SYLLABLE KYAELM", 0x31, "Hangul"),
    c(0xCED3, None, "HANGUL SYLLABLE KYAELB", 0x31, "Hangul"),
    c(0xCED4, None, "HANGUL SYLLABLE KYAELS", 0x31, "Hangul"),
    c(0xCED5, None, "HANGUL SYLLABLE KYAELT", 0x31, "Hangul"),
    c(0xCED6, None, "HANGUL SYLLABLE KYAELP", 0x31, "Hangul"),
    c(0xCED7, None, "HANGUL SYLLABLE KYAELH", 0x31, "Hangul"),
    c(0xCED8, None, "HANGUL SYLLABLE KYAEM", 0x31, "Hangul"),
    c(0xCED9, None, "HANGUL SYLLABLE KYAEB", 0x31, "Hangul"),
    c(0xCEDA, None, "HANGUL SYLLABLE KYAEBS", 0x31, "Hangul"),
    c(0xCEDB, None, "HANGUL SYLLABLE KYAES", 0x31, "Hangul"),
    c(0xCEDC, None, "HANGUL SYLLABLE KYAESS", 0x31, "Hangul"),
    c(0xCEDD, None, "HANGUL SYLLABLE KYAENG", 0x31, "Hangul"),
    c(0xCEDE, None, "HANGUL SYLLABLE KYAEJ", 0x31, "Hangul"),
    c(0xCEDF, None, "HANGUL SYLLABLE KYAEC", 0x31, "Hangul"),
    c(0xCEE0, None, "HANGUL SYLLABLE KYAEK", 0x31, "Hangul"),
    c(0xCEE1, None, "HANGUL SYLLABLE KYAET", 0x31, "Hangul"),
    c(0xCEE2, None, "HANGUL SYLLABLE KYAEP", 0x31, "Hangul"),
    c(0xCEE3, None, "HANGUL SYLLABLE KYAEH", 0x31, "Hangul"),
    c(0xCEE4, None, "HANGUL SYLLABLE KEO", 0x31, "Hangul"),
    c(0xCEE5, None, "HANGUL SYLLABLE KEOG", 0x31, "Hangul"),
    c(0xCEE6, None, "HANGUL SYLLABLE KEOGG", 0x31, "Hangul"),
    c(0xCEE7, None, "HANGUL SYLLABLE KEOGS", 0x31, "Hangul"),
    c(0xCEE8, None, "HANGUL SYLLABLE KEON", 0x31, "Hangul"),
    c(0xCEE9, None, "HANGUL SYLLABLE KEONJ", 0x31, "Hangul"),
    c(0xCEEA, None, "HANGUL SYLLABLE KEONH", 0x31, "Hangul"),
    c(0xCEEB, None, "HANGUL SYLLABLE KEOD", 0x31, "Hangul"),
    c(0xCEEC, None, "HANGUL SYLLABLE KEOL", 0x31, "Hangul"),
    c(0xCEED, None, "HANGUL SYLLABLE KEOLG", 0x31, "Hangul"),
    c(0xCEEE, None, "HANGUL SYLLABLE KEOLM", 0x31, "Hangul"),
    c(0xCEEF, None, "HANGUL SYLLABLE KEOLB", 0x31, "Hangul"),
    c(0xCEF0, None, "HANGUL SYLLABLE KEOLS", 0x31, "Hangul"),
    c(0xCEF1, None, "HANGUL SYLLABLE KEOLT", 0x31, "Hangul"),
    c(0xCEF2, None, "HANGUL SYLLABLE KEOLP", 0x31, "Hangul"),
    c(0xCEF3, None, "HANGUL SYLLABLE KEOLH", 0x31, "Hangul"),
    c(0xCEF4, None, "HANGUL SYLLABLE KEOM", 0x31, "Hangul"),
    c(0xCEF5, None, "HANGUL SYLLABLE KEOB", 0x31, "Hangul"),
    c(0xCEF6, None, "HANGUL SYLLABLE KEOBS", 0x31, "Hangul"),
    c(0xCEF7, None, "HANGUL SYLLABLE KEOS", 0x31, "Hangul"),
    c(0xCEF8, None, "HANGUL SYLLABLE KEOSS", 0x31, "Hangul"),
    c(0xCEF9, None, "HANGUL SYLLABLE KEONG", 0x31, "Hangul"),
    c(0xCEFA, None, "HANGUL SYLLABLE KEOJ", 0x31, "Hangul"),
    c(0xCEFB, None, "HANGUL SYLLABLE KEOC", 0x31, "Hangul"),
    c(0xCEFC, None, "HANGUL SYLLABLE KEOK", 0x31, "Hangul"),
    c(0xCEFD, None, "HANGUL SYLLABLE KEOT", 0x31, "Hangul"),
    c(0xCEFE, None, "HANGUL SYLLABLE KEOP", 0x31, "Hangul"),
    c(0xCEFF, None, "HANGUL SYLLABLE KEOH", 0x31, "Hangul"),
    c(0xCF00, None, "HANGUL SYLLABLE KE", 0x31, "Hangul"),
    c(0xCF01, None, "HANGUL SYLLABLE KEG", 0x31, "Hangul"),
    c(0xCF02, None, "HANGUL SYLLABLE KEGG", 0x31, "Hangul"),
    c(0xCF03, None, "HANGUL SYLLABLE KEGS", 0x31, "Hangul"),
    c(0xCF04, None, "HANGUL SYLLABLE KEN", 0x31, "Hangul"),
    c(0xCF05, None, "HANGUL SYLLABLE KENJ", 0x31, "Hangul"),
    c(0xCF06, None, "HANGUL SYLLABLE KENH", 0x31, "Hangul"),
    c(0xCF07, None, "HANGUL SYLLABLE KED", 0x31, "Hangul"),
    c(0xCF08, None, "HANGUL SYLLABLE KEL", 0x31, "Hangul"),
    c(0xCF09, None, "HANGUL SYLLABLE KELG", 0x31, "Hangul"),
    c(0xCF0A, None, "HANGUL SYLLABLE KELM", 0x31, "Hangul"),
    c(0xCF0B, None, "HANGUL SYLLABLE KELB", 0x31, "Hangul"),
    c(0xCF0C, None, "HANGUL SYLLABLE KELS", 0x31, "Hangul"),
    c(0xCF0D, None, "HANGUL SYLLABLE KELT", 0x31, "Hangul"),
    c(0xCF0E, None, "HANGUL SYLLABLE KELP", 0x31, "Hangul"),
    c(0xCF0F, None, "HANGUL SYLLABLE KELH", 0x31, "Hangul"),
    c(0xCF10, None, "HANGUL SYLLABLE KEM", 0x31, "Hangul"),
    c(0xCF11, None, "HANGUL SYLLABLE KEB", 0x31, "Hangul"),
    c(0xCF12, None, "HANGUL SYLLABLE KEBS", 0x31, "Hangul"),
    c(0xCF13, None, "HANGUL SYLLABLE KES", 0x31, "Hangul"),
    c(0xCF14, None, "HANGUL SYLLABLE KESS", 0x31, "Hangul"),
    c(0xCF15, None, "HANGUL SYLLABLE KENG", 0x31, "Hangul"),
    c(0xCF16, None, "HANGUL SYLLABLE KEJ", 0x31, "Hangul"),
    c(0xCF17, None, "HANGUL SYLLABLE KEC", 0x31, "Hangul"),
    c(0xCF18, None, "HANGUL SYLLABLE KEK", 0x31, "Hangul"),
    c(0xCF19, None, "HANGUL SYLLABLE KET", 0x31, "Hangul"),
    c(0xCF1A, None, "HANGUL SYLLABLE KEP", 0x31, "Hangul"),
    c(0xCF1B, None, "HANGUL SYLLABLE KEH", 0x31, "Hangul"),
    c(0xCF1C, None, "HANGUL SYLLABLE KYEO", 0x31, "Hangul"),
    c(0xCF1D, None, "HANGUL SYLLABLE KYEOG", 0x31, "Hangul"),
    c(0xCF1E, None, "HANGUL SYLLABLE KYEOGG", 0x31, "Hangul"),
    c(0xCF1F, None, "HANGUL SYLLABLE KYEOGS", 0x31, "Hangul"),
    c(0xCF20, None, "HANGUL SYLLABLE KYEON", 0x31, "Hangul"),
    c(0xCF21, None, "HANGUL SYLLABLE KYEONJ", 0x31, "Hangul"),
    c(0xCF22, None, "HANGUL SYLLABLE KYEONH", 0x31, "Hangul"),
    c(0xCF23, None, "HANGUL SYLLABLE KYEOD", 0x31, "Hangul"),
    c(0xCF24, None, "HANGUL SYLLABLE KYEOL", 0x31, "Hangul"),
    c(0xCF25, None, "HANGUL SYLLABLE KYEOLG", 0x31, "Hangul"),
    c(0xCF26, None, "HANGUL SYLLABLE KYEOLM", 0x31, "Hangul"),
    c(0xCF27, None, "HANGUL SYLLABLE KYEOLB", 0x31, "Hangul"),
    c(0xCF28, None, "HANGUL SYLLABLE KYEOLS", 0x31, "Hangul"),
    c(0xCF29, None, "HANGUL SYLLABLE KYEOLT", 0x31, "Hangul"),
    c(0xCF2A, None, "HANGUL SYLLABLE KYEOLP", 0x31, "Hangul"),
    c(0xCF2B, None, "HANGUL SYLLABLE KYEOLH", 0x31, "Hangul"),
    c(0xCF2C, None, "HANGUL SYLLABLE KYEOM", 0x31, "Hangul"),
    c(0xCF2D, None, "HANGUL SYLLABLE KYEOB", 0x31, "Hangul"),
    c(0xCF2E, None, "HANGUL SYLLABLE KYEOBS", 0x31, "Hangul"),
    c(0xCF2F, None, "HANGUL SYLLABLE KYEOS", 0x31, "Hangul"),
    c(0xCF30, None, "HANGUL SYLLABLE KYEOSS", 0x31, "Hangul"),
    c(0xCF31, None, "HANGUL SYLLABLE KYEONG", 0x31, "Hangul"),
    c(0xCF32, None, "HANGUL SYLLABLE KYEOJ", 0x31, "Hangul"),
    c(0xCF33, None, "HANGUL SYLLABLE KYEOC", 0x31, "Hangul"),
    c(0xCF34, None, "HANGUL SYLLABLE KYEOK", 0x31, "Hangul"),
    c(0xCF35, None, "HANGUL SYLLABLE KYEOT", 0x31, "Hangul"),
    c(0xCF36, None, "HANGUL SYLLABLE KYEOP", 0x31, "Hangul"),
    c(0xCF37, None, "HANGUL SYLLABLE KYEOH", 0x31, "Hangul"),
    c(0xCF38, None, "HANGUL SYLLABLE KYE", 0x31, "Hangul"),
    c(0xCF39, None, "HANGUL SYLLABLE KYEG", 0x31, "Hangul"),
    c(0xCF3A, None, "HANGUL SYLLABLE KYEGG", 0x31, "Hangul"),
    c(0xCF3B, None, "HANGUL SYLLABLE KYEGS", 0x31, "Hangul"),
    c(0xCF3C, None, "HANGUL SYLLABLE KYEN", 0x31, "Hangul"),
    c(0xCF3D, None, "HANGUL SYLLABLE KYENJ", 0x31, "Hangul"),
    c(0xCF3E, None, "HANGUL SYLLABLE KYENH", 0x31, "Hangul"),
    c(0xCF3F, None, "HANGUL SYLLABLE KYED", 0x31, "Hangul"),
    c(0xCF40, None, "HANGUL SYLLABLE KYEL", 0x31, "Hangul"),
    c(0xCF41, None, "HANGUL SYLLABLE KYELG", 0x31, "Hangul"),
    c(0xCF42, None, "HANGUL SYLLABLE KYELM", 0x31, "Hangul"),
    c(0xCF43, None, "HANGUL SYLLABLE KYELB", 0x31, "Hangul"),
    c(0xCF44, None, "HANGUL SYLLABLE KYELS", 0x31, "Hangul"),
    c(0xCF45, None, "HANGUL SYLLABLE KYELT", 0x31, "Hangul"),
    c(0xCF46, None, "HANGUL SYLLABLE KYELP", 0x31, "Hangul"),
    c(0xCF47, None, "HANGUL SYLLABLE KYELH", 0x31, "Hangul"),
    c(0xCF48, None, "HANGUL SYLLABLE KYEM", 0x31, "Hangul"),
    c(0xCF49, None, "HANGUL SYLLABLE KYEB", 0x31, "Hangul"),
    c(0xCF4A, None, "HANGUL SYLLABLE KYEBS", 0x31, "Hangul"),
    c(0xCF4B, None, "HANGUL SYLLABLE KYES", 0x31, "Hangul"),
    c(0xCF4C, None, "HANGUL SYLLABLE KYESS", 0x31, "Hangul"),
    c(0xCF4D, None, "HANGUL SYLLABLE KYENG", 0x31, "Hangul"),
    c(0xCF4E, None, "HANGUL SYLLABLE KYEJ", 0x31, "Hangul"),
    c(0xCF4F, None, "HANGUL SYLLABLE KYEC", 0x31, "Hangul"),
    c(0xCF50, None, "HANGUL SYLLABLE KYEK", 0x31, "Hangul"),
    c(0xCF51, None, "HANGUL SYLLABLE KYET", 0x31, "Hangul"),
    c(0xCF52, None, "HANGUL SYLLABLE KYEP", 0x31, "Hangul"),
    c(0xCF53, None, "HANGUL SYLLABLE KYEH", 0x31, "Hangul"),
    c(0xCF54, None, "HANGUL SYLLABLE KO", 0x31, "Hangul"),
    c(0xCF55, None, "HANGUL SYLLABLE KOG", 0x31, "Hangul"),
    c(0xCF56, None, "HANGUL SYLLABLE KOGG", 0x31, "Hangul"),
    c(0xCF57, None, "HANGUL SYLLABLE KOGS", 0x31, "Hangul"),
    c(0xCF58, None, "HANGUL SYLLABLE KON", 0x31, "Hangul"),
    c(0xCF59, None, "HANGUL SYLLABLE KONJ", 0x31, "Hangul"),
    c(0xCF5A, None, "HANGUL SYLLABLE KONH", 0x31, "Hangul"),
    c(0xCF5B, None, "HANGUL SYLLABLE KOD", 0x31, "Hangul"),
    c(0xCF5C, None, "HANGUL SYLLABLE KOL", 0x31, "Hangul"),
    c(0xCF5D, None, "HANGUL SYLLABLE KOLG", 0x31, "Hangul"),
    c(0xCF5E, None, "HANGUL SYLLABLE KOLM", 0x31, "Hangul"),
    c(0xCF5F, None, "HANGUL SYLLABLE KOLB", 0x31, "Hangul"),
    c(0xCF60, None, "HANGUL SYLLABLE KOLS", 0x31, "Hangul"),
    c(0xCF61, None, "HANGUL SYLLABLE KOLT", 0x31, "Hangul"),
    c(0xCF62, None, "HANGUL SYLLABLE KOLP", 0x31, "Hangul"),
    c(0xCF63, None, "HANGUL SYLLABLE KOLH", 0x31, "Hangul"),
    c(0xCF64, None, "HANGUL SYLLABLE KOM", 0x31, "Hangul"),
    c(0xCF65, None, "HANGUL SYLLABLE KOB", 0x31, "Hangul"),
    c(0xCF66, None, "HANGUL SYLLABLE KOBS", 0x31, "Hangul"),
    c(0xCF67, None, "HANGUL SYLLABLE KOS", 0x31, "Hangul"),
    c(0xCF68, None, "HANGUL SYLLABLE KOSS", 0x31, "Hangul"),
    c(0xCF69, None, "HANGUL SYLLABLE KONG", 0x31, "Hangul"),
    c(0xCF6A, None, "HANGUL SYLLABLE KOJ", 0x31, "Hangul"),
    c(0xCF6B, None, "HANGUL SYLLABLE KOC", 0x31, "Hangul"),
    c(0xCF6C, None, "HANGUL SYLLABLE KOK", 0x31, "Hangul"),
    c(0xCF6D, None, "HANGUL SYLLABLE KOT", 0x31, "Hangul"),
    c(0xCF6E, None, "HANGUL SYLLABLE KOP", 0x31, "Hangul"),
    c(0xCF6F, None, "HANGUL SYLLABLE KOH", 0x31, "Hangul"),
    c(0xCF70, None, "HANGUL SYLLABLE KWA", 0x31, "Hangul"),
    c(0xCF71, None, "HANGUL SYLLABLE KWAG", 0x31, "Hangul"),
    c(0xCF72, None, "HANGUL SYLLABLE KWAGG", 0x31, "Hangul"),
    c(0xCF73, None, "HANGUL SYLLABLE KWAGS", 0x31, "Hangul"),
    c(0xCF74, None, "HANGUL SYLLABLE KWAN", 0x31, "Hangul"),
    c(0xCF75, None, "HANGUL SYLLABLE KWANJ", 0x31, "Hangul"),
    c(0xCF76, None, "HANGUL SYLLABLE KWANH", 0x31, "Hangul"),
    c(0xCF77, None, "HANGUL SYLLABLE KWAD", 0x31, "Hangul"),
    c(0xCF78, None, "HANGUL SYLLABLE KWAL", 0x31, "Hangul"),
    c(0xCF79, None, "HANGUL SYLLABLE KWALG", 0x31, "Hangul"),
    c(0xCF7A, None, "HANGUL SYLLABLE KWALM", 0x31, "Hangul"),
    c(0xCF7B, None, "HANGUL SYLLABLE KWALB", 0x31, "Hangul"),
    c(0xCF7C, None, "HANGUL SYLLABLE KWALS", 0x31, "Hangul"),
    c(0xCF7D, None, "HANGUL SYLLABLE KWALT", 0x31, "Hangul"),
    c(0xCF7E, None, "HANGUL SYLLABLE KWALP", 0x31, "Hangul"),
    c(0xCF7F, None, "HANGUL SYLLABLE KWALH", 0x31, "Hangul"),
    c(0xCF80, None, "HANGUL SYLLABLE KWAM", 0x31, "Hangul"),
    c(0xCF81, None, "HANGUL SYLLABLE KWAB", 0x31, "Hangul"),
    c(0xCF82, None, "HANGUL SYLLABLE KWABS", 0x31, "Hangul"),
    c(0xCF83, None, "HANGUL SYLLABLE KWAS", 0x31, "Hangul"),
    c(0xCF84, None, "HANGUL SYLLABLE KWASS", 0x31, "Hangul"),
    c(0xCF85, None, "HANGUL SYLLABLE KWANG", 0x31, "Hangul"),
    c(0xCF86, None, "HANGUL SYLLABLE KWAJ", 0x31, "Hangul"),
    c(0xCF87, None, "HANGUL SYLLABLE KWAC", 0x31, "Hangul"),
    c(0xCF88, None, "HANGUL SYLLABLE KWAK", 0x31, "Hangul"),
    c(0xCF89, None, "HANGUL SYLLABLE KWAT", 0x31, "Hangul"),
    c(0xCF8A, None, "HANGUL SYLLABLE KWAP", 0x31, "Hangul"),
    c(0xCF8B, None, "HANGUL SYLLABLE KWAH", 0x31, "Hangul"),
    c(0xCF8C, None, "HANGUL SYLLABLE KWAE", 0x31, "Hangul"),
    c(0xCF8D, None, "HANGUL SYLLABLE KWAEG", 0x31, "Hangul"),
    c(0xCF8E, None, "HANGUL SYLLABLE KWAEGG", 0x31, "Hangul"),
    c(0xCF8F, None, "HANGUL SYLLABLE KWAEGS", 0x31, "Hangul"),
    c(0xCF90, None, "HANGUL SYLLABLE KWAEN", 0x31, "Hangul"),
    c(0xCF91, None, "HANGUL SYLLABLE KWAENJ", 0x31, "Hangul"),
    c(0xCF92, None, "HANGUL SYLLABLE KWAENH", 0x31, "Hangul"),
    c(0xCF93, None, "HANGUL SYLLABLE KWAED", 0x31, "Hangul"),
    c(0xCF94, None, "HANGUL SYLLABLE KWAEL", 0x31, "Hangul"),
    c(0xCF95, None, "HANGUL SYLLABLE KWAELG", 0x31, "Hangul"),
    c(0xCF96, None, "HANGUL SYLLABLE KWAELM", 0x31, "Hangul"),
    c(0xCF97, None, "HANGUL SYLLABLE KWAELB", 0x31, "Hangul"),
    c(0xCF98, None, "HANGUL SYLLABLE KWAELS", 0x31, "Hangul"),
    c(0xCF99, None, "HANGUL SYLLABLE KWAELT", 0x31, "Hangul"),
    c(0xCF9A, None, "HANGUL SYLLABLE KWAELP", 0x31, "Hangul"),
    c(0xCF9B, None, "HANGUL SYLLABLE KWAELH", 0x31, "Hangul"),
    c(0xCF9C, None, "HANGUL SYLLABLE KWAEM", 0x31, "Hangul"),
    c(0xCF9D, None, "HANGUL SYLLABLE KWAEB", 0x31, "Hangul"),
    c(0xCF9E, None, "HANGUL SYLLABLE KWAEBS", 0x31, "Hangul"),
    c(0xCF9F, None, "HANGUL SYLLABLE KWAES", 0x31, "Hangul"),
    c(0xCFA0, None, "HANGUL SYLLABLE KWAESS", 0x31, "Hangul"),
    c(0xCFA1, None, "HANGUL SYLLABLE KWAENG", 0x31, "Hangul"),
    c(0xCFA2, None, "HANGUL SYLLABLE KWAEJ", 0x31, "Hangul"),
    c(0xCFA3, None, "HANGUL SYLLABLE KWAEC", 0x31, "Hangul"),
    c(0xCFA4, None, "HANGUL SYLLABLE KWAEK", 0x31, "Hangul"),
    c(0xCFA5, None, "HANGUL SYLLABLE KWAET", 0x31, "Hangul"),
    c(0xCFA6, None, "HANGUL SYLLABLE KWAEP", 0x31, "Hangul"),
    c(0xCFA7, None, "HANGUL SYLLABLE KWAEH", 0x31, "Hangul"),
    c(0xCFA8, None, "HANGUL SYLLABLE KOE", 0x31, "Hangul"),
    c(0xCFA9, None, "HANGUL SYLLABLE KOEG", 0x31, "Hangul"),
    c(0xCFAA, None, "HANGUL SYLLABLE KOEGG", 0x31, "Hangul"),
    c(0xCFAB, None, "HANGUL SYLLABLE KOEGS", 0x31, "Hangul"),
    c(0xCFAC, None, "HANGUL SYLLABLE KOEN", 0x31, "Hangul"),
    c(0xCFAD, None, "HANGUL SYLLABLE KOENJ", 0x31, "Hangul"),
    c(0xCFAE, None, "HANGUL SYLLABLE KOENH", 0x31, "Hangul"),
    c(0xCFAF, None, "HANGUL SYLLABLE KOED", 0x31, "Hangul"),
    c(0xCFB0, None, "HANGUL SYLLABLE KOEL", 0x31, "Hangul"),
    c(0xCFB1, None, "HANGUL SYLLABLE KOELG", 0x31, "Hangul"),
    c(0xCFB2, None, "HANGUL SYLLABLE KOELM", 0x31, "Hangul"),
    c(0xCFB3, None, "HANGUL SYLLABLE KOELB", 0x31, "Hangul"),
    c(0xCFB4, None, "HANGUL SYLLABLE KOELS", 0x31, "Hangul"),
    c(0xCFB5, None, "HANGUL SYLLABLE KOELT", 0x31, "Hangul"),
    c(0xCFB6, None, "HANGUL SYLLABLE KOELP", 0x31, "Hangul"),
    c(0xCFB7, None, "HANGUL SYLLABLE KOELH", 0x31, "Hangul"),
    c(0xCFB8, None, "HANGUL SYLLABLE KOEM", 0x31, "Hangul"),
    c(0xCFB9, None, "HANGUL SYLLABLE KOEB", 0x31, "Hangul"),
    c(0xCFBA, None, "HANGUL SYLLABLE KOEBS", 0x31, "Hangul"),
    c(0xCFBB, None, "HANGUL SYLLABLE KOES", 0x31, "Hangul"),
    c(0xCFBC, None, "HANGUL SYLLABLE KOESS", 0x31, "Hangul"),
    c(0xCFBD, None, "HANGUL SYLLABLE KOENG", 0x31, "Hangul"),
    c(0xCFBE, None, "HANGUL SYLLABLE KOEJ", 0x31, "Hangul"),
    c(0xCFBF, None, "HANGUL SYLLABLE KOEC", 0x31, "Hangul"),
    c(0xCFC0, None, "HANGUL SYLLABLE KOEK", 0x31, "Hangul"),
    c(0xCFC1, None, "HANGUL SYLLABLE KOET", 0x31, "Hangul"),
    c(0xCFC2, None, "HANGUL SYLLABLE KOEP", 0x31, "Hangul"),
    c(0xCFC3, None, "HANGUL SYLLABLE KOEH", 0x31, "Hangul"),
    c(0xCFC4, None, "HANGUL SYLLABLE KYO", 0x31, "Hangul"),
    c(0xCFC5, None, "HANGUL SYLLABLE KYOG", 0x31, "Hangul"),
    c(0xCFC6, None, "HANGUL SYLLABLE KYOGG", 0x31, "Hangul"),
    c(0xCFC7, None, "HANGUL SYLLABLE KYOGS", 0x31, "Hangul"),
    c(0xCFC8, None, "HANGUL SYLLABLE KYON", 0x31, "Hangul"),
    c(0xCFC9, None, "HANGUL SYLLABLE KYONJ", 0x31, "Hangul"),
    c(0xCFCA, None, "HANGUL SYLLABLE KYONH", 0x31, "Hangul"),
    c(0xCFCB, None, "HANGUL SYLLABLE KYOD", 0x31, "Hangul"),
    c(0xCFCC, None, "HANGUL SYLLABLE KYOL", 0x31, "Hangul"),
    c(0xCFCD, None, "HANGUL SYLLABLE KYOLG", 0x31, "Hangul"),
    c(0xCFCE, None, "HANGUL SYLLABLE KYOLM", 0x31, "Hangul"),
    c(0xCFCF, None, "HANGUL SYLLABLE KYOLB", 0x31, "Hangul"),
    c(0xCFD0, None, "HANGUL SYLLABLE KYOLS", 0x31, "Hangul"),
    c(0xCFD1, None, "HANGUL SYLLABLE KYOLT", 0x31, "Hangul"),
    c(0xCFD2, None, "HANGUL SYLLABLE KYOLP", 0x31, "Hangul"),
    c(0xCFD3, None, "HANGUL SYLLABLE KYOLH", 0x31, "Hangul"),
    c(0xCFD4, None, "HANGUL SYLLABLE KYOM", 0x31, "Hangul"),
    c(0xCFD5, None, "HANGUL SYLLABLE KYOB", 0x31, "Hangul"),
    c(0xCFD6, None, "HANGUL SYLLABLE KYOBS", 0x31, "Hangul"),
    c(0xCFD7, None, "HANGUL SYLLABLE KYOS", 0x31, "Hangul"),
    c(0xCFD8, None, "HANGUL SYLLABLE KYOSS", 0x31, "Hangul"),
    c(0xCFD9, None, "HANGUL SYLLABLE KYONG", 0x31, "Hangul"),
    c(0xCFDA, None, "HANGUL SYLLABLE KYOJ", 0x31, "Hangul"),
    c(0xCFDB, None, "HANGUL SYLLABLE KYOC", 0x31, "Hangul"),
    c(0xCFDC, None, "HANGUL SYLLABLE KYOK", 0x31, "Hangul"),
    c(0xCFDD, None, "HANGUL SYLLABLE KYOT", 0x31, "Hangul"),
    c(0xCFDE, None, "HANGUL SYLLABLE KYOP", 0x31, "Hangul"),
    c(0xCFDF, None, "HANGUL SYLLABLE KYOH", 0x31, "Hangul"),
    c(0xCFE0, None, "HANGUL SYLLABLE KU", 0x31, "Hangul"),
    c(0xCFE1, None, "HANGUL SYLLABLE KUG", 0x31, "Hangul"),
    c(0xCFE2, None, "HANGUL SYLLABLE KUGG", 0x31, "Hangul"),
    c(0xCFE3, None, "HANGUL SYLLABLE KUGS", 0x31, "Hangul"),
    c(0xCFE4, None, "HANGUL SYLLABLE KUN", 0x31, "Hangul"),
    c(0xCFE5, None, "HANGUL SYLLABLE KUNJ", 0x31, "Hangul"),
    c(0xCFE6, None, "HANGUL SYLLABLE KUNH", 0x31, "Hangul"),
    c(0xCFE7, None, "HANGUL SYLLABLE KUD", 0x31, "Hangul"),
    c(0xCFE8, None, "HANGUL SYLLABLE KUL", 0x31, "Hangul"),
    c(0xCFE9, None, "HANGUL SYLLABLE KULG", 0x31, "Hangul"),
    c(0xCFEA, None, "HANGUL SYLLABLE KULM", 0x31, "Hangul"),
    c(0xCFEB, None, "HANGUL SYLLABLE KULB", 0x31, "Hangul"),
    c(0xCFEC, None, "HANGUL SYLLABLE KULS", 0x31, "Hangul"),
    c(0xCFED, None, "HANGUL SYLLABLE KULT", 0x31, "Hangul"),
    c(0xCFEE, None, "HANGUL SYLLABLE KULP", 0x31, "Hangul"),
    c(0xCFEF, None, "HANGUL SYLLABLE KULH", 0x31, "Hangul"),
    c(0xCFF0, None, "HANGUL SYLLABLE KUM", 0x31, "Hangul"),
    c(0xCFF1, None, "HANGUL SYLLABLE KUB", 0x31, "Hangul"),
    c(0xCFF2, None, "HANGUL SYLLABLE KUBS", 0x31, "Hangul"),
    c(0xCFF3, None, "HANGUL SYLLABLE KUS", 0x31, "Hangul"),
    c(0xCFF4, None, "HANGUL SYLLABLE KUSS", 0x31, "Hangul"),
    c(0xCFF5, None, "HANGUL SYLLABLE KUNG", 0x31, "Hangul"),
    c(0xCFF6, None, "HANGUL SYLLABLE KUJ", 0x31, "Hangul"),
    c(0xCFF7, None, "HANGUL SYLLABLE KUC", 0x31, "Hangul"),
    c(0xCFF8, None, "HANGUL SYLLABLE KUK", 0x31, "Hangul"),
    c(0xCFF9, None, "HANGUL SYLLABLE KUT", 0x31, "Hangul"),
    c(0xCFFA, None, "HANGUL SYLLABLE KUP", 0x31, "Hangul"),
    c(0xCFFB, None, "HANGUL SYLLABLE KUH", 0x31, "Hangul"),
    c(0xCFFC, None, "HANGUL SYLLABLE KWEO", 0x31, "Hangul"),
    c(0xCFFD, None, "HANGUL SYLLABLE KWEOG", 0x31, "Hangul"),
    c(0xCFFE, None, "HANGUL SYLLABLE KWEOGG", 0x31, "Hangul"),
    c(0xCFFF, None, "HANGUL SYLLABLE KWEOGS", 0x31, "Hangul"),
    c(0xD000, None, "HANGUL SYLLABLE KWEON", 0x31, "Hangul"),
    c(0xD001, None, "HANGUL SYLLABLE KWEONJ", 0x31, "Hangul"),
    c(0xD002, None, "HANGUL SYLLABLE KWEONH", 0x31, "Hangul"),
    c(0xD003, None, "HANGUL SYLLABLE KWEOD", 0x31, "Hangul"),
    c(0xD004, None, "HANGUL SYLLABLE KWEOL", 0x31, "Hangul"),
    c(0xD005, None, "HANGUL SYLLABLE KWEOLG", 0x31, "Hangul"),
    c(0xD006, None, "HANGUL SYLLABLE KWEOLM", 0x31, "Hangul"),
    c(0xD007, None, "HANGUL SYLLABLE KWEOLB", 0x31, "Hangul"),
    c(0xD008, None, "HANGUL SYLLABLE KWEOLS", 0x31, "Hangul"),
    c(0xD009, None, "HANGUL SYLLABLE KWEOLT", 0x31, "Hangul"),
    c(0xD00A, None, "HANGUL SYLLABLE KWEOLP", 0x31, "Hangul"),
    c(0xD00B, None, "HANGUL SYLLABLE KWEOLH", 0x31, "Hangul"),
    c(0xD00C, None, "HANGUL SYLLABLE KWEOM", 0x31, "Hangul"),
    c(0xD00D, None, "HANGUL SYLLABLE KWEOB", 0x31, "Hangul"),
    c(0xD00E, None, "HANGUL SYLLABLE KWEOBS", 0x31, "Hangul"),
    c(0xD00F, None, "HANGUL SYLLABLE KWEOS", 0x31, "Hangul"),
    c(0xD010, None, "HANGUL SYLLABLE KWEOSS", 0x31, "Hangul"),
    c(0xD011, None, "HANGUL SYLLABLE KWEONG", 0x31, "Hangul"),
    c(0xD012, None, "HANGUL SYLLABLE KWEOJ", 0x31, "Hangul"),
    c(0xD013, None, "HANGUL SYLLABLE KWEOC", 0x31, "Hangul"),
    c(0xD014, None, "HANGUL SYLLABLE KWEOK", 0x31, "Hangul"),
    c(0xD015, None, "HANGUL SYLLABLE KWEOT", 0x31, "Hangul"),
    c(0xD016, None, "HANGUL SYLLABLE KWEOP", 0x31, "Hangul"),
    c(0xD017, None, "HANGUL SYLLABLE KWEOH", 0x31, "Hangul"),
    c(0xD018, None, "HANGUL SYLLABLE KWE", 0x31, "Hangul"),
    c(0xD019, None, "HANGUL SYLLABLE KWEG", 0x31, "Hangul"),
    c(0xD01A, None, "HANGUL SYLLABLE KWEGG", 0x31, "Hangul"),
    c(0xD01B, None, "HANGUL SYLLABLE KWEGS", 0x31, "Hangul"),
    c(0xD01C, None, "HANGUL SYLLABLE KWEN", 0x31, "Hangul"),
    c(0xD01D, None, "HANGUL SYLLABLE KWENJ", 0x31, "Hangul"),
    c(0xD01E, None, "HANGUL SYLLABLE KWENH", 0x31, "Hangul"),
    c(0xD01F, None, "HANGUL SYLLABLE KWED", 0x31, "Hangul"),
    c(0xD020, None, "HANGUL SYLLABLE KWEL", 0x31, "Hangul"),
    c(0xD021, None, "HANGUL SYLLABLE KWELG", 0x31, "Hangul"),
    c(0xD022, None, "HANGUL SYLLABLE KWELM", 0x31, "Hangul"),
    c(0xD023, None, "HANGUL SYLLABLE KWELB", 0x31, "Hangul"),
    c(0xD024, None, "HANGUL SYLLABLE KWELS", 0x31, "Hangul"),
    c(0xD025, None, "HANGUL SYLLABLE KWELT", 0x31, "Hangul"),
    c(0xD026, None, "HANGUL SYLLABLE KWELP", 0x31, "Hangul"),
    c(0xD027, None, "HANGUL SYLLABLE KWELH", 0x31, "Hangul"),
    c(0xD028, None, "HANGUL SYLLABLE KWEM", 0x31, "Hangul"),
    c(0xD029, None, "HANGUL SYLLABLE KWEB", 0x31, "Hangul"),
    c(0xD02A, None, "HANGUL SYLLABLE KWEBS", 0x31, "Hangul"),
    c(0xD02B, None, "HANGUL SYLLABLE KWES", 0x31, "Hangul"),
    c(0xD02C, None, "HANGUL SYLLABLE KWESS", 0x31, "Hangul"),
    c(0xD02D, None, "HANGUL SYLLABLE KWENG", 0x31, "Hangul"),
    c(0xD02E, None, "HANGUL SYLLABLE KWEJ", 0x31, "Hangul"),
    c(0xD02F, None, "HANGUL SYLLABLE KWEC", 0x31, "Hangul"),
    c(0xD030, None, "HANGUL SYLLABLE KWEK", 0x31, "Hangul"),
    c(0xD031, None, "HANGUL SYLLABLE KWET", 0x31, "Hangul"),
    c(0xD032, None, "HANGUL SYLLABLE KWEP", 0x31, "Hangul"),
    c(0xD033, None, "HANGUL SYLLABLE KWEH", 0x31, "Hangul"),
    c(0xD034, None, "HANGUL SYLLABLE KWI", 0x31, "Hangul"),
    c(0xD035, None, "HANGUL SYLLABLE KWIG", 0x31, "Hangul"),
    c(0xD036, None, "HANGUL SYLLABLE KWIGG", 0x31, "Hangul"),
    c(0xD037, None, "HANGUL SYLLABLE KWIGS", 0x31, "Hangul"),
    c(0xD038, None, "HANGUL SYLLABLE KWIN", 0x31, "Hangul"),
    c(0xD039, None, "HANGUL SYLLABLE KWINJ", 0x31, "Hangul"),
    c(0xD03A, None, "HANGUL SYLLABLE KWINH", 0x31, "Hangul"),
    c(0xD03B, None, "HANGUL SYLLABLE KWID", 0x31, "Hangul"),
    c(0xD03C, None, "HANGUL SYLLABLE KWIL", 0x31, "Hangul"),
    c(0xD03D, None, "HANGUL SYLLABLE KWILG", 0x31, "Hangul"),
    c(0xD03E, None, "HANGUL SYLLABLE KWILM", 0x31, "Hangul"),
    c(0xD03F, None, "HANGUL SYLLABLE KWILB", 0x31, "Hangul"),
    c(0xD040, None, "HANGUL SYLLABLE KWILS", 0x31, "Hangul"),
    c(0xD041, None, "HANGUL SYLLABLE KWILT", 0x31, "Hangul"),
    c(0xD042, None, "HANGUL SYLLABLE KWILP", 0x31, "Hangul"),
    c(0xD043, None, "HANGUL SYLLABLE KWILH", 0x31, "Hangul"),
    c(0xD044, None, "HANGUL SYLLABLE KWIM", 0x31, "Hangul"),
    c(0xD045, None, "HANGUL SYLLABLE KWIB", 0x31, "Hangul"),
    c(0xD046, None, "HANGUL SYLLABLE KWIBS", 0x31, "Hangul"),
    c(0xD047, None, "HANGUL SYLLABLE KWIS", 0x31, "Hangul"),
    c(0xD048, None, "HANGUL SYLLABLE KWISS", 0x31, "Hangul"),
    c(0xD049, None, "HANGUL SYLLABLE KWING", 0x31, "Hangul"),
    c(0xD04A, None, "HANGUL SYLLABLE KWIJ", 0x31, "Hangul"),
    c(0xD04B, None, "HANGUL SYLLABLE KWIC", 0x31, "Hangul"),
    c(0xD04C, None, "HANGUL SYLLABLE KWIK", 0x31, "Hangul"),
    c(0xD04D, None, "HANGUL SYLLABLE KWIT", 0x31, "Hangul"),
    c(0xD04E, None, "HANGUL SYLLABLE KWIP", 0x31, "Hangul"),
    c(0xD04F, None, "HANGUL SYLLABLE KWIH", 0x31, "Hangul"),
    c(0xD050, None, "HANGUL SYLLABLE KYU", 0x31, "Hangul"),
    c(0xD051, None, "HANGUL SYLLABLE KYUG", 0x31, "Hangul"),
    c(0xD052, None, "HANGUL SYLLABLE KYUGG", 0x31, "Hangul"),
    c(0xD053, None, "HANGUL SYLLABLE KYUGS", 0x31, "Hangul"),
    c(0xD054, None, "HANGUL SYLLABLE KYUN", 0x31, "Hangul"),
    c(0xD055, None, "HANGUL SYLLABLE KYUNJ", 0x31, "Hangul"),
    c(0xD056, None, "HANGUL SYLLABLE KYUNH", 0x31, "Hangul"),
    c(0xD057, None, "HANGUL SYLLABLE KYUD", 0x31, "Hangul"),
    c(0xD058, None, "HANGUL SYLLABLE KYUL", 0x31, "Hangul"),
    c(0xD059, None, "HANGUL SYLLABLE KYULG", 0x31, "Hangul"),
    c(0xD05A, None, "HANGUL SYLLABLE KYULM", 0x31, "Hangul"),
    c(0xD05B, None, "HANGUL SYLLABLE KYULB", 0x31, "Hangul"),
    c(0xD05C, None, "HANGUL SYLLABLE KYULS", 0x31, "Hangul"),
    c(0xD05D, None, "HANGUL SYLLABLE KYULT", 0x31, "Hangul"),
    c(0xD05E, None, "HANGUL SYLLABLE KYULP", 0x31, "Hangul"),
    c(0xD05F, None, "HANGUL SYLLABLE KYULH", 0x31, "Hangul"),
    c(0xD060, None, "HANGUL SYLLABLE KYUM", 0x31, "Hangul"),
    c(0xD061, None, "HANGUL SYLLABLE KYUB", 0x31, "Hangul"),
    c(0xD062, None, "HANGUL SYLLABLE KYUBS", 0x31, "Hangul"),
    c(0xD063, None, "HANGUL SYLLABLE KYUS", 0x31, "Hangul"),
    c(0xD064, None, "HANGUL SYLLABLE KYUSS", 0x31, "Hangul"),
    c(0xD065, None, "HANGUL SYLLABLE KYUNG", 0x31, "Hangul"),
    c(0xD066, None, "HANGUL SYLLABLE KYUJ", 0x31, "Hangul"),
    c(0xD067, None, "HANGUL SYLLABLE KYUC", 0x31, "Hangul"),
    c(0xD068, None, "HANGUL SYLLABLE KYUK", 0x31, "Hangul"),
    c(0xD069, None, "HANGUL SYLLABLE KYUT", 0x31, "Hangul"),
    c(0xD06A, None, "HANGUL SYLLABLE KYUP", 0x31, "Hangul"),
    c(0xD06B, None, "HANGUL SYLLABLE KYUH", 0x31, "Hangul"),
    c(0xD06C, None, "HANGUL SYLLABLE KEU", 0x31, "Hangul"),
    c(0xD06D, None, "HANGUL SYLLABLE KEUG", 0x31, "Hangul"),
    c(0xD06E, None, "HANGUL SYLLABLE KEUGG", 0x31, "Hangul"),
    c(0xD06F, None, "HANGUL SYLLABLE KEUGS", 0x31, "Hangul"),
    c(0xD070, None, "HANGUL SYLLABLE KEUN", 0x31, "Hangul"),
    c(0xD071, None, "HANGUL SYLLABLE KEUNJ", 0x31, "Hangul"),
    c(0xD072, None, "HANGUL SYLLABLE KEUNH", 0x31, "Hangul"),
    c(0xD073, None, "HANGUL SYLLABLE KEUD", 0x31, "Hangul"),
    c(0xD074, None, "HANGUL SYLLABLE KEUL", 0x31, "Hangul"),
    c(0xD075, None, "HANGUL SYLLABLE KEULG", 0x31, "Hangul"),
    c(0xD076, None, "HANGUL SYLLABLE KEULM", 0x31, "Hangul"),
    c(0xD077, None, "HANGUL SYLLABLE KEULB", 0x31, "Hangul"),
    c(0xD078, None, "HANGUL SYLLABLE KEULS", 0x31, "Hangul"),
    c(0xD079, None, "HANGUL SYLLABLE KEULT", 0x31, "Hangul"),
    c(0xD07A, None, "HANGUL SYLLABLE KEULP", 0x31, "Hangul"),
    c(0xD07B, None, "HANGUL SYLLABLE KEULH", 0x31, "Hangul"),
    c(0xD07C, None, "HANGUL SYLLABLE KEUM", 0x31, "Hangul"),
    c(0xD07D, None, "HANGUL SYLLABLE KEUB", 0x31, "Hangul"),
    c(0xD07E, None, "HANGUL SYLLABLE KEUBS", 0x31, "Hangul"),
    c(0xD07F, None, "HANGUL SYLLABLE KEUS", 0x31, "Hangul"),
    c(0xD080, None, "HANGUL SYLLABLE KEUSS", 0x31, "Hangul"),
    c(0xD081, None, "HANGUL SYLLABLE KEUNG", 0x31, "Hangul"),
    c(0xD082, None, "HANGUL SYLLABLE KEUJ", 0x31, "Hangul"),
    c(0xD083, None, "HANGUL SYLLABLE KEUC", 0x31, "Hangul"),
    c(0xD084, None, "HANGUL SYLLABLE KEUK", 0x31, "Hangul"),
    c(0xD085, None, "HANGUL SYLLABLE KEUT", 0x31, "Hangul"),
    c(0xD086, None, "HANGUL SYLLABLE KEUP", 0x31, "Hangul"),
    c(0xD087, None, "HANGUL SYLLABLE KEUH", 0x31, "Hangul"),
    c(0xD088, None, "HANGUL SYLLABLE KYI", 0x31, "Hangul"),
    c(0xD089, None, "HANGUL SYLLABLE KYIG", 0x31, "Hangul"),
    c(0xD08A, None, "HANGUL SYLLABLE KYIGG", 0x31, "Hangul"),
    c(0xD08B, None, "HANGUL SYLLABLE KYIGS", 0x31, "Hangul"),
    c(0xD08C, None, "HANGUL SYLLABLE KYIN", 0x31, "Hangul"),
    c(0xD08D, None, "HANGUL SYLLABLE KYINJ", 0x31, "Hangul"),
    c(0xD08E, None, "HANGUL SYLLABLE KYINH", 0x31, "Hangul"),
    c(0xD08F, None, "HANGUL SYLLABLE KYID", 0x31, "Hangul"),
    c(0xD090, None, "HANGUL SYLLABLE KYIL", 0x31, "Hangul"),
    c(0xD091, None, "HANGUL SYLLABLE KYILG", 0x31, "Hangul"),
    c(0xD092, None, "HANGUL SYLLABLE KYILM", 0x31, "Hangul"),
    c(0xD093, None, "HANGUL SYLLABLE KYILB", 0x31, "Hangul"),
    c(0xD094, None, "HANGUL SYLLABLE KYILS", 0x31, "Hangul"),
    c(0xD095, None, "HANGUL SYLLABLE KYILT", 0x31, "Hangul"),
    c(0xD096, None, "HANGUL SYLLABLE KYILP", 0x31, "Hangul"),
    c(0xD097, None, "HANGUL SYLLABLE KYILH", 0x31, "Hangul"),
    c(0xD098, None, "HANGUL SYLLABLE KYIM", 0x31, "Hangul"),
    c(0xD099, None, "HANGUL SYLLABLE KYIB", 0x31, "Hangul"),
    c(0xD09A, None, "HANGUL SYLLABLE KYIBS", 0x31, "Hangul"),
    c(0xD09B, None, "HANGUL SYLLABLE KYIS", 0x31, "Hangul"),
    c(0xD09C, None, "HANGUL SYLLABLE KYISS", 0x31, "Hangul"),
    c(0xD09D, None, "HANGUL SYLLABLE KYING", 0x31, "Hangul"),
    c(0xD09E, None, "HANGUL SYLLABLE KYIJ", 0x31, "Hangul"),
    c(0xD09F, None, "HANGUL SYLLABLE KYIC", 0x31, "Hangul"),
    c(0xD0A0, None, "HANGUL SYLLABLE KYIK", 0x31, "Hangul"),
    c(0xD0A1, None, "HANGUL SYLLABLE KYIT", 0x31, "Hangul"),
    c(0xD0A2, None, "HANGUL SYLLABLE KYIP", 0x31, "Hangul"),
    c(0xD0A3, None, "HANGUL SYLLABLE KYIH", 0x31, "Hangul"),
    c(0xD0A4, None, "HANGUL SYLLABLE KI", 0x31, "Hangul"),
    c(0xD0A5, None, "HANGUL SYLLABLE KIG", 0x31, "Hangul"),
    c(0xD0A6, None, "HANGUL SYLLABLE KIGG", 0x31, "Hangul"),
    c(0xD0A7, None, "HANGUL SYLLABLE KIGS", 0x31, "Hangul"),
    c(0xD0A8, None, "HANGUL SYLLABLE KIN", 0x31, "Hangul"),
    c(0xD0A9, None, "HANGUL SYLLABLE KINJ", 0x31, "Hangul"),
    c(0xD0AA, None, "HANGUL SYLLABLE KINH", 0x31, "Hangul"),
    c(0xD0AB, None, "HANGUL SYLLABLE KID", 0x31, "Hangul"),
    c(0xD0AC, None, "HANGUL SYLLABLE KIL", 0x31, "Hangul"),
    c(0xD0AD, None, "HANGUL SYLLABLE KILG", 0x31, "Hangul"),
    c(0xD0AE, None, "HANGUL SYLLABLE KILM", 0x31, "Hangul"),
    c(0xD0AF, None, "HANGUL SYLLABLE KILB", 0x31, "Hangul"),
    c(0xD0B0, None, "HANGUL SYLLABLE KILS", 0x31, "Hangul"),
    c(0xD0B1, None, "HANGUL SYLLABLE KILT", 0x31, "Hangul"),
    c(0xD0B2, None, "HANGUL SYLLABLE KILP", 0x31, "Hangul"),
    c(0xD0B3, None, "HANGUL SYLLABLE KILH", 0x31, "Hangul"),
    c(0xD0B4, None, "HANGUL SYLLABLE KIM", 0x31, "Hangul"),
    c(0xD0B5, None, "HANGUL SYLLABLE KIB", 0x31, "Hangul"),
    c(0xD0B6, None, "HANGUL SYLLABLE KIBS", 0x31, "Hangul"),
    c(0xD0B7, None, "HANGUL SYLLABLE KIS", 0x31, "Hangul"),
    c(0xD0B8, None, "HANGUL SYLLABLE KISS", 0x31, "Hangul"),
    c(0xD0B9, None, "HANGUL SYLLABLE KING", 0x31, "Hangul"),
    c(0xD0BA, None, "HANGUL SYLLABLE KIJ", 0x31, "Hangul"),
    c(0xD0BB, None, "HANGUL SYLLABLE KIC", 0x31, "Hangul"),
    c(0xD0BC, None, "HANGUL SYLLABLE KIK", 0x31, "Hangul"),
    c(0xD0BD, None, "HANGUL SYLLABLE KIT", 0x31, "Hangul"),
    c(0xD0BE, None, "HANGUL SYLLABLE KIP", 0x31, "Hangul"),
    c(0xD0BF, None, "HANGUL SYLLABLE KIH", 0x31, "Hangul"),
    c(0xD0C0, None, "HANGUL SYLLABLE TA", 0x31, "Hangul"),
    c(0xD0C1, None, "HANGUL SYLLABLE TAG", 0x31, "Hangul"),
    c(0xD0C2, None, "HANGUL SYLLABLE TAGG", 0x31, "Hangul"),
    c(0xD0C3, None, "HANGUL SYLLABLE TAGS", 0x31, "Hangul"),
    c(0xD0C4, None, "HANGUL SYLLABLE TAN", 0x31, "Hangul"),
    c(0xD0C5, None, "HANGUL SYLLABLE TANJ", 0x31, "Hangul"),
    c(0xD0C6, None, "HANGUL SYLLABLE TANH", 0x31, "Hangul"),
    c(0xD0C7, None, "HANGUL SYLLABLE TAD", 0x31, "Hangul"),
    c(0xD0C8, None, "HANGUL SYLLABLE TAL", 0x31, "Hangul"),
    c(0xD0C9, None, "HANGUL SYLLABLE TALG", 0x31, "Hangul"),
    c(0xD0CA, None, "HANGUL SYLLABLE TALM", 0x31, "Hangul"),
    c(0xD0CB, None, "HANGUL SYLLABLE TALB", 0x31, "Hangul"),
    c(0xD0CC, None, "HANGUL SYLLABLE TALS", 0x31, "Hangul"),
    c(0xD0CD, None, "HANGUL SYLLABLE TALT", 0x31, "Hangul"),
    c(0xD0CE, None, "HANGUL SYLLABLE TALP", 0x31, "Hangul"),
    c(0xD0CF, None, "HANGUL SYLLABLE TALH", 0x31, "Hangul"),
    c(0xD0D0, None, "HANGUL SYLLABLE TAM", 0x31, "Hangul"),
    c(0xD0D1, None, "HANGUL SYLLABLE TAB", 0x31, "Hangul"),
    c(0xD0D2, None, "HANGUL SYLLABLE TABS", 0x31, "Hangul"),
    c(0xD0D3, None, "HANGUL SYLLABLE TAS", 0x31, "Hangul"),
    c(0xD0D4, None, "HANGUL SYLLABLE TASS", 0x31, "Hangul"),
    c(0xD0D5, None, "HANGUL SYLLABLE TANG", 0x31, "Hangul"),
    c(0xD0D6, None, "HANGUL SYLLABLE TAJ", 0x31, "Hangul"),
    c(0xD0D7, None, "HANGUL SYLLABLE TAC", 0x31, "Hangul"),
    c(0xD0D8, None, "HANGUL SYLLABLE TAK", 0x31, "Hangul"),
    c(0xD0D9, None, "HANGUL SYLLABLE TAT", 0x31, "Hangul"),
    c(0xD0DA, None, "HANGUL SYLLABLE TAP", 0x31, "Hangul"),
    c(0xD0DB, None, "HANGUL SYLLABLE TAH", 0x31, "Hangul"),
    c(0xD0DC, None, "HANGUL SYLLABLE TAE", 0x31, "Hangul"),
    c(0xD0DD, None, "HANGUL SYLLABLE TAEG", 0x31, "Hangul"),
    c(0xD0DE, None, "HANGUL SYLLABLE TAEGG", 0x31, "Hangul"),
    c(0xD0DF, None, "HANGUL SYLLABLE TAEGS", 0x31, "Hangul"),
    c(0xD0E0, None, "HANGUL SYLLABLE TAEN", 0x31, "Hangul"),
    c(0xD0E1, None, "HANGUL SYLLABLE TAENJ", 0x31, "Hangul"),
    c(0xD0E2, None, "HANGUL SYLLABLE TAENH", 0x31, "Hangul"),
    c(0xD0E3, None, "HANGUL SYLLABLE TAED", 0x31, "Hangul"),
    c(0xD0E4, None, "HANGUL SYLLABLE TAEL", 0x31, "Hangul"),
    c(0xD0E5, None, "HANGUL SYLLABLE TAELG", 0x31, "Hangul"),
    c(0xD0E6, None, "HANGUL SYLLABLE TAELM", 0x31, "Hangul"),
    c(0xD0E7, None, "HANGUL SYLLABLE TAELB", 0x31, "Hangul"),
    c(0xD0E8, None, "HANGUL SYLLABLE TAELS", 0x31, "Hangul"),
    c(0xD0E9, None, "HANGUL SYLLABLE TAELT", 0x31, "Hangul"),
    c(0xD0EA, None, "HANGUL SYLLABLE TAELP", 0x31, "Hangul"),
    c(0xD0EB, None, "HANGUL SYLLABLE TAELH", 0x31, "Hangul"),
    c(0xD0EC, None, "HANGUL SYLLABLE TAEM", 0x31, "Hangul"),
    c(0xD0ED, None, "HANGUL SYLLABLE TAEB", 0x31, "Hangul"),
    c(0xD0EE, None, "HANGUL SYLLABLE TAEBS", 0x31, "Hangul"),
    c(0xD0EF, None, "HANGUL SYLLABLE TAES", 0x31, "Hangul"),
    c(0xD0F0, None, "HANGUL SYLLABLE TAESS", 0x31, "Hangul"),
    c(0xD0F1, None, "HANGUL SYLLABLE TAENG", 0x31, "Hangul"),
    c(0xD0F2, None, "HANGUL SYLLABLE TAEJ", 0x31, "Hangul"),
    c(0xD0F3, None, "HANGUL SYLLABLE TAEC", 0x31, "Hangul"),
    c(0xD0F4, None, "HANGUL SYLLABLE TAEK", 0x31, "Hangul"),
    c(0xD0F5, None, "HANGUL SYLLABLE TAET", 0x31, "Hangul"),
    c(0xD0F6, None, "HANGUL SYLLABLE TAEP", 0x31, "Hangul"),
    c(0xD0F7, None, "HANGUL SYLLABLE TAEH", 0x31, "Hangul"),
    c(0xD0F8, None, "HANGUL SYLLABLE TYA", 0x31, "Hangul"),
    c(0xD0F9, None, "HANGUL SYLLABLE TYAG", 0x31, "Hangul"),
    c(0xD0FA, None, "HANGUL SYLLABLE TYAGG", 0x31, "Hangul"),
    c(0xD0FB, None, "HANGUL SYLLABLE TYAGS", 0x31, "Hangul"),
    c(0xD0FC, None, "HANGUL SYLLABLE TYAN", 0x31, "Hangul"),
    c(0xD0FD, None, "HANGUL SYLLABLE TYANJ", 0x31, "Hangul"),
    c(0xD0FE, None, "HANGUL SYLLABLE TYANH", 0x31, "Hangul"),
    c(0xD0FF, None, "HANGUL SYLLABLE TYAD", 0x31, "Hangul"),
    c(0xD100, None, "HANGUL SYLLABLE TYAL", 0x31, "Hangul"),
    c(0xD101, None, "HANGUL SYLLABLE TYALG", 0x31, "Hangul"),
    c(0xD102, None, "HANGUL SYLLABLE TYALM", 0x31, "Hangul"),
    c(0xD103, None, "HANGUL SYLLABLE TYALB", 0x31, "Hangul"),
    c(0xD104, None, "HANGUL SYLLABLE TYALS", 0x31, "Hangul"),
    c(0xD105, None, "HANGUL SYLLABLE TYALT", 0x31, "Hangul"),
    c(0xD106, None, "HANGUL SYLLABLE TYALP", 0x31, "Hangul"),
    c(0xD107, None, "HANGUL SYLLABLE TYALH", 0x31, "Hangul"),
    c(0xD108, None, "HANGUL SYLLABLE TYAM", 0x31, "Hangul"),
    c(0xD109, None, "HANGUL SYLLABLE TYAB", 0x31, "Hangul"),
    c(0xD10A, None, "HANGUL SYLLABLE TYABS", 0x31, "Hangul"),
    c(0xD10B, None, "HANGUL SYLLABLE TYAS", 0x31, "Hangul"),
    c(0xD10C, None, "HANGUL SYLLABLE TYASS", 0x31, "Hangul"),
    c(0xD10D, None, "HANGUL SYLLABLE TYANG", 0x31, "Hangul"),
    c(0xD10E, None, "HANGUL SYLLABLE TYAJ", 0x31, "Hangul"),
    c(0xD10F, None, "HANGUL SYLLABLE TYAC", 0x31, "Hangul"),
    c(0xD110, None, "HANGUL SYLLABLE TYAK", 0x31, "Hangul"),
    c(0xD111, None, "HANGUL SYLLABLE TYAT", 0x31, "Hangul"),
    c(0xD112, None, "HANGUL SYLLABLE TYAP", 0x31, "Hangul"),
    c(0xD113, None, "HANGUL SYLLABLE TYAH", 0x31, "Hangul"),
    c(0xD114, None, "HANGUL SYLLABLE TYAE", 0x31, "Hangul"),
    c(0xD115, None, "HANGUL SYLLABLE TYAEG", 0x31, "Hangul"),
    c(0xD116, None, "HANGUL SYLLABLE TYAEGG", 0x31, "Hangul"),
    c(0xD117, None, "HANGUL SYLLABLE TYAEGS", 0x31, "Hangul"),
    c(0xD118, None, "HANGUL SYLLABLE TYAEN", 0x31, "Hangul"),
    c(0xD119, None, "HANGUL SYLLABLE TYAENJ", 0x31, "Hangul"),
    c(0xD11A, None, "HANGUL SYLLABLE TYAENH", 0x31, "Hangul"),
    c(0xD11B, None, "HANGUL SYLLABLE TYAED", 0x31, "Hangul"),
    c(0xD11C, None, "HANGUL SYLLABLE TYAEL", 0x31, "Hangul"),
    c(0xD11D, None, "HANGUL SYLLABLE TYAELG", 0x31, "Hangul"),
    c(0xD11E, None, "HANGUL SYLLABLE TYAELM", 0x31, "Hangul"),
    c(0xD11F, None, "HANGUL SYLLABLE TYAELB", 0x31, "Hangul"),
    c(0xD120, None, "HANGUL SYLLABLE TYAELS", 0x31, "Hangul"),
    c(0xD121, None, "HANGUL SYLLABLE TYAELT", 0x31, "Hangul"),
    c(0xD122, None, "HANGUL SYLLABLE TYAELP", 0x31, "Hangul"),
    c(0xD123, None, "HANGUL SYLLABLE TYAELH", 0x31, "Hangul"),
    c(0xD124, None, "HANGUL SYLLABLE TYAEM", 0x31, "Hangul"),
    c(0xD125, None, "HANGUL SYLLABLE TYAEB", 0x31, "Hangul"),
    c(0xD126, None, "HANGUL SYLLABLE TYAEBS", 0x31, "Hangul"),
    c(0xD127, None, "HANGUL SYLLABLE TYAES", 0x31, "Hangul"),
    c(0xD128, None, "HANGUL SYLLABLE TYAESS", 0x31, "Hangul"),
    c(0xD129, None, "HANGUL SYLLABLE TYAENG", 0x31, "Hangul"),
    c(0xD12A, None, "HANGUL SYLLABLE TYAEJ", 0x31, "Hangul"),
    c(0xD12B, None, "HANGUL SYLLABLE TYAEC", 0x31, "Hangul"),
    c(0xD12C, None, "HANGUL SYLLABLE TYAEK", 0x31, "Hangul"),
    c(0xD12D, None, "HANGUL SYLLABLE TYAET", 0x31, "Hangul"),
    c(0xD12E, None, "HANGUL SYLLABLE TYAEP", 0x31, "Hangul"),
    c(0xD12F, None, "HANGUL SYLLABLE TYAEH", 0x31, "Hangul"),
    c(0xD130, None, "HANGUL SYLLABLE TEO", 0x31, "Hangul"),
    c(0xD131, None, "HANGUL SYLLABLE TEOG", 0x31, "Hangul"),
    c(0xD132, None, "HANGUL SYLLABLE TEOGG", 0x31, "Hangul"),
    c(0xD133, None, "HANGUL SYLLABLE TEOGS", 0x31, "Hangul"),
    c(0xD134, None, "HANGUL SYLLABLE TEON", 0x31, "Hangul"),
    c(0xD135, None, "HANGUL SYLLABLE TEONJ", 0x31, "Hangul"),
    c(0xD136, None, "HANGUL SYLLABLE TEONH", 0x31, "Hangul"),
    c(0xD137, None, "HANGUL SYLLABLE TEOD", 0x31, "Hangul"),
    c(0xD138, None, "HANGUL SYLLABLE TEOL", 0x31, "Hangul"),
    c(0xD139, None, "HANGUL SYLLABLE TEOLG", 0x31, "Hangul"),
    c(0xD13A, None, "HANGUL SYLLABLE TEOLM", 0x31, "Hangul"),
    c(0xD13B, None, "HANGUL SYLLABLE TEOLB", 0x31, "Hangul"),
    c(0xD13C, None, "HANGUL SYLLABLE TEOLS", 0x31, "Hangul"),
    c(0xD13D, None, "HANGUL SYLLABLE TEOLT", 0x31, "Hangul"),
    c(0xD13E, None, "HANGUL SYLLABLE TEOLP", 0x31, "Hangul"),
    c(0xD13F, None, "HANGUL SYLLABLE TEOLH", 0x31, "Hangul"),
    c(0xD140, None, "HANGUL SYLLABLE TEOM", 0x31, "Hangul"),
    c(0xD141, None, "HANGUL SYLLABLE TEOB", 0x31, "Hangul"),
    c(0xD142, None, "HANGUL SYLLABLE TEOBS", 0x31, "Hangul"),
    c(0xD143, None, "HANGUL SYLLABLE TEOS", 0x31, "Hangul"),
    c(0xD144, None, "HANGUL SYLLABLE TEOSS", 0x31, "Hangul"),
    c(0xD145, None, "HANGUL SYLLABLE TEONG", 0x31, "Hangul"),
    c(0xD146, None, "HANGUL SYLLABLE TEOJ", 0x31, "Hangul"),
    c(0xD147, None, "HANGUL SYLLABLE TEOC", 0x31, "Hangul"),
    c(0xD148, None, "HANGUL SYLLABLE TEOK", 0x31, "Hangul"),
    c(0xD149, None, "HANGUL SYLLABLE TEOT", 0x31, "Hangul"),
    c(0xD14A, None, "HANGUL SYLLABLE TEOP", 0x31, "Hangul"),
    c(0xD14B, None, "HANGUL SYLLABLE TEOH", 0x31, "Hangul"),
    c(0xD14C, None, "HANGUL SYLLABLE TE", 0x31, "Hangul"),
    c(0xD14D, None, "HANGUL SYLLABLE TEG", 0x31, "Hangul"),
    c(0xD14E, None, "HANGUL SYLLABLE TEGG", 0x31, "Hangul"),
    c(0xD14F, None, "HANGUL SYLLABLE TEGS", 0x31, "Hangul"),
    c(0xD150, None, "HANGUL SYLLABLE TEN", 0x31, "Hangul"),
    c(0xD151, None, "HANGUL SYLLABLE TENJ", 0x31, "Hangul"),
    c(0xD152, None, "HANGUL SYLLABLE TENH", 0x31, "Hangul"),
    c(0xD153, None, "HANGUL SYLLABLE TED", 0x31, "Hangul"),
    c(0xD154, None, "HANGUL SYLLABLE TEL", 0x31, "Hangul"),
    c(0xD155, None, "HANGUL SYLLABLE TELG", 0x31, "Hangul"),
    c(0xD156, None, "HANGUL SYLLABLE TELM", 0x31, "Hangul"),
    c(0xD157, None, "HANGUL SYLLABLE TELB", 0x31, "Hangul"),
    c(0xD158, None, "HANGUL SYLLABLE TELS", 0x31, "Hangul"),
    c(0xD159, None, "HANGUL SYLLABLE TELT", 0x31, "Hangul"),
    c(0xD15A, None, "HANGUL SYLLABLE TELP", 0x31, "Hangul"),
    c(0xD15B, None, "HANGUL SYLLABLE TELH", 0x31, "Hangul"),
    c(0xD15C, None, "HANGUL SYLLABLE TEM", 0x31, "Hangul"),
    c(0xD15D, None, "HANGUL SYLLABLE TEB", 0x31, "Hangul"),
    c(0xD15E, None, "HANGUL SYLLABLE TEBS", 0x31, "Hangul"),
    c(0xD15F, None, "HANGUL SYLLABLE TES", 0x31, "Hangul"),
    c(0xD160, None, "HANGUL SYLLABLE TESS", 0x31, "Hangul"),
    c(0xD161, None, "HANGUL SYLLABLE TENG", 0x31, "Hangul"),
    c(0xD162, None, "HANGUL SYLLABLE TEJ", 0x31, "Hangul"),
    c(0xD163, None, "HANGUL SYLLABLE TEC", 0x31, "Hangul"),
    c(0xD164, None, "HANGUL SYLLABLE TEK", 0x31, "Hangul"),
    c(0xD165, None, "HANGUL SYLLABLE TET", 0x31, "Hangul"),
    c(0xD166, None, "HANGUL SYLLABLE TEP", 0x31, "Hangul"),
    c(0xD167, None, "HANGUL SYLLABLE TEH", 0x31, "Hangul"),
    c(0xD168, None, "HANGUL SYLLABLE TYEO", 0x31, "Hangul"),
    c(0xD169, None, "HANGUL SYLLABLE TYEOG", 0x31, "Hangul"),
    c(0xD16A, None, "HANGUL SYLLABLE TYEOGG", 0x31, "Hangul"),
    c(0xD16B, None, "HANGUL SYLLABLE TYEOGS", 0x31, "Hangul"),
    c(0xD16C, None, "HANGUL SYLLABLE TYEON", 0x31, "Hangul"),
    c(0xD16D, None, "HANGUL SYLLABLE TYEONJ", 0x31, "Hangul"),
    c(0xD16E, None, "HANGUL SYLLABLE TYEONH", 0x31, "Hangul"),
    c(0xD16F, None, "HANGUL SYLLABLE TYEOD", 0x31, "Hangul"),
    c(0xD170, None, "HANGUL SYLLABLE TYEOL", 0x31, "Hangul"),
    c(0xD171, None, "HANGUL SYLLABLE TYEOLG", 0x31, "Hangul"),
    c(0xD172, None, "HANGUL SYLLABLE TYEOLM", 0x31, "Hangul"),
    c(0xD173, None, "HANGUL SYLLABLE TYEOLB", 0x31, "Hangul"),
    c(0xD174, None, "HANGUL SYLLABLE TYEOLS", 0x31, "Hangul"),
    c(0xD175, None, "HANGUL SYLLABLE TYEOLT", 0x31, "Hangul"),
    c(0xD176, None, "HANGUL SYLLABLE TYEOLP", 0x31, "Hangul"),
    c(0xD177, None, "HANGUL SYLLABLE TYEOLH", 0x31, "Hangul"),
    c(0xD178, None, "HANGUL SYLLABLE TYEOM", 0x31, "Hangul"),
    c(0xD179, None, "HANGUL SYLLABLE TYEOB", 0x31, "Hangul"),
    c(0xD17A, None, "HANGUL SYLLABLE TYEOBS", 0x31, "Hangul"),
    c(0xD17B, None, "HANGUL SYLLABLE TYEOS", 0x31, "Hangul"),
    c(0xD17C, None, "HANGUL SYLLABLE TYEOSS", 0x31, "Hangul"),
    c(0xD17D, None, "HANGUL SYLLABLE TYEONG", 0x31, "Hangul"),
    c(0xD17E, None, "HANGUL SYLLABLE TYEOJ", 0x31, "Hangul"),
    c(0xD17F, None, "HANGUL SYLLABLE TYEOC", 0x31, "Hangul"),
    c(0xD180, None, "HANGUL SYLLABLE TYEOK", 0x31, "Hangul"),
    c(0xD181, None, "HANGUL SYLLABLE TYEOT", 0x31, "Hangul"),
    c(0xD182, None, "HANGUL SYLLABLE TYEOP", 0x31, "Hangul"),
    c(0xD183, None, "HANGUL SYLLABLE TYEOH", 0x31, "Hangul"),
    c(0xD184, None, "HANGUL SYLLABLE TYE", 0x31, "Hangul"),
    c(0xD185, None, "HANGUL SYLLABLE TYEG", 0x31, "Hangul"),
    c(0xD186, None, "HANGUL SYLLABLE TYEGG", 0x31, "Hangul"),
    c(0xD187, None, "HANGUL SYLLABLE TYEGS", 0x31, "Hangul"),
    c(0xD188, None, "HANGUL SYLLABLE TYEN", 0x31, "Hangul"),
    c(0xD189, None, "HANGUL SYLLABLE TYENJ", 0x31, "Hangul"),
    c(0xD18A, None, "HANGUL SYLLABLE TYENH", 0x31, "Hangul"),
    c(0xD18B, None, "HANGUL SYLLABLE TYED", 0x31, "Hangul"),
    c(0xD18C, None, "HANGUL SYLLABLE TYEL", 0x31, "Hangul"),
    c(0xD18D, None, "HANGUL SYLLABLE TYELG", 0x31, "Hangul"),
    c(0xD18E, None, "HANGUL SYLLABLE TYELM", 0x31, "Hangul"),
    c(0xD18F, None, "HANGUL SYLLABLE TYELB", 0x31, "Hangul"),
    c(0xD190, None, "HANGUL SYLLABLE TYELS", 0x31, "Hangul"),
    c(0xD191, None, "HANGUL SYLLABLE TYELT", 0x31, "Hangul"),
    c(0xD192, None, "HANGUL SYLLABLE TYELP", 0x31, "Hangul"),
    c(0xD193, None, "HANGUL SYLLABLE TYELH", 0x31, "Hangul"),
    c(0xD194, None, "HANGUL SYLLABLE TYEM", 0x31, "Hangul"),
    c(0xD195, None, "HANGUL SYLLABLE TYEB", 0x31, "Hangul"),
    c(0xD196, None, "HANGUL SYLLABLE TYEBS", 0x31, "Hangul"),
    c(0xD197, None, "HANGUL SYLLABLE TYES", 0x31, "Hangul"),
    c(0xD198, None, "HANGUL SYLLABLE TYESS", 0x31, "Hangul"),
    c(0xD199, None, "HANGUL SYLLABLE TYENG", 0x31, "Hangul"),
    c(0xD19A, None, "HANGUL SYLLABLE TYEJ", 0x31, "Hangul"),
    c(0xD19B, None, "HANGUL SYLLABLE TYEC", 0x31, "Hangul"),
    c(0xD19C, None, "HANGUL SYLLABLE TYEK", 0x31, "Hangul"),
    c(0xD19D, None, "HANGUL SYLLABLE TYET", 0x31, "Hangul"),
    c(0xD19E, None, "HANGUL SYLLABLE TYEP", 0x31, "Hangul"),
    c(0xD19F, None, "HANGUL SYLLABLE TYEH", 0x31, "Hangul"),
    c(0xD1A0, None, "HANGUL SYLLABLE TO", 0x31, "Hangul"),
    c(0xD1A1, None, "HANGUL SYLLABLE TOG", 0x31, "Hangul"),
    c(0xD1A2, None, "HANGUL SYLLABLE TOGG", 0x31, "Hangul"),
    c(0xD1A3, None, "HANGUL SYLLABLE TOGS", 0x31, "Hangul"),
    c(0xD1A4, None, "HANGUL SYLLABLE TON", 0x31, "Hangul"),
    c(0xD1A5, None, "HANGUL SYLLABLE TONJ", 0x31, "Hangul"),
    c(0xD1A6, None, "HANGUL SYLLABLE TONH", 0x31, "Hangul"),
    c(0xD1A7, None, "HANGUL SYLLABLE TOD", 0x31, "Hangul"),
    c(0xD1A8, None, "HANGUL SYLLABLE TOL", 0x31, "Hangul"),
    c(0xD1A9, None, "HANGUL SYLLABLE TOLG", 0x31, "Hangul"),
    c(0xD1AA, None, "HANGUL SYLLABLE TOLM", 0x31, "Hangul"),
    c(0xD1AB, None, "HANGUL SYLLABLE TOLB", 0x31, "Hangul"),
    c(0xD1AC, None, "HANGUL SYLLABLE TOLS", 0x31, "Hangul"),
    c(0xD1AD, None, "HANGUL SYLLABLE TOLT", 0x31, "Hangul"),
    c(0xD1AE, None, "HANGUL SYLLABLE TOLP", 0x31, "Hangul"),
    c(0xD1AF, None, "HANGUL SYLLABLE TOLH", 0x31, "Hangul"),
    c(0xD1B0, None, "HANGUL SYLLABLE TOM", 0x31, "Hangul"),
    c(0xD1B1, None, "HANGUL SYLLABLE TOB", 0x31, "Hangul"),
    c(0xD1B2, None, "HANGUL SYLLABLE TOBS", 0x31, "Hangul"),
    c(0xD1B3, None, "HANGUL SYLLABLE TOS", 0x31, "Hangul"),
    c(0xD1B4, None, "HANGUL SYLLABLE TOSS", 0x31, "Hangul"),
    c(0xD1B5, None, "HANGUL SYLLABLE TONG", 0x31, "Hangul"),
    c(0xD1B6, None, "HANGUL SYLLABLE TOJ", 0x31, "Hangul"),
    c(0xD1B7, None, "HANGUL SYLLABLE TOC", 0x31, "Hangul"),
    c(0xD1B8, None, "HANGUL SYLLABLE TOK", 0x31, "Hangul"),
    c(0xD1B9, None, "HANGUL SYLLABLE TOT", 0x31, "Hangul"),
    c(0xD1BA, None, "HANGUL SYLLABLE TOP", 0x31, "Hangul"),
    c(0xD1BB, None, "HANGUL SYLLABLE TOH", 0x31, "Hangul"),
    c(0xD1BC, None, "HANGUL SYLLABLE TWA", 0x31, "Hangul"),
    c(0xD1BD, None, "HANGUL SYLLABLE TWAG", 0x31, "Hangul"),
    c(0xD1BE, None, "HANGUL SYLLABLE TWAGG", 0x31, "Hangul"),
    c(0xD1BF, None, "HANGUL SYLLABLE TWAGS", 0x31, "Hangul"),
    c(0xD1C0, None, "HANGUL SYLLABLE TWAN", 0x31, "Hangul"),
    c(0xD1C1, None, "HANGUL SYLLABLE TWANJ", 0x31, "Hangul"),
    c(0xD1C2, None, "HANGUL SYLLABLE TWANH", 0x31, "Hangul"),
    c(0xD1C3, None, "HANGUL SYLLABLE TWAD", 0x31, "Hangul"),
    c(0xD1C4, None, "HANGUL SYLLABLE TWAL", 0x31, "Hangul"),
    c(0xD1C5, None, "HANGUL SYLLABLE TWALG", 0x31, "Hangul"),
    c(0xD1C6, None, "HANGUL SYLLABLE TWALM", 0x31, "Hangul"),
    c(0xD1C7, None, "HANGUL SYLLABLE TWALB", 0x31, "Hangul"),
    c(0xD1C8, None, "HANGUL SYLLABLE TWALS", 0x31, "Hangul"),
    c(0xD1C9, None, "HANGUL SYLLABLE TWALT", 0x31, "Hangul"),
    c(0xD1CA, None, "HANGUL SYLLABLE TWALP", 0x31, "Hangul"),
    c(0xD1CB, None, "HANGUL SYLLABLE TWALH", 0x31, "Hangul"),
    c(0xD1CC, None, "HANGUL SYLLABLE TWAM", 0x31, "Hangul"),
    c(0xD1CD, None, "HANGUL SYLLABLE TWAB", 0x31, "Hangul"),
    c(0xD1CE, None, "HANGUL SYLLABLE TWABS", 0x31, "Hangul"),
    c(0xD1CF, None, "HANGUL SYLLABLE TWAS", 0x31, "Hangul"),
    c(0xD1D0, None, "HANGUL SYLLABLE TWASS", 0x31, "Hangul"),
    c(0xD1D1, None, "HANGUL SYLLABLE TWANG", 0x31, "Hangul"),
    c(0xD1D2, None, "HANGUL SYLLABLE TWAJ", 0x31, "Hangul"),
    c(0xD1D3, None, "HANGUL SYLLABLE TWAC", 0x31, "Hangul"),
    c(0xD1D4, None, "HANGUL SYLLABLE TWAK", 0x31, "Hangul"),
    c(0xD1D5, None, "HANGUL SYLLABLE TWAT", 0x31, "Hangul"),
    c(0xD1D6, None, "HANGUL SYLLABLE TWAP", 0x31, "Hangul"),
    c(0xD1D7, None, "HANGUL SYLLABLE TWAH", 0x31, "Hangul"),
    c(0xD1D8, None, "HANGUL SYLLABLE TWAE", 0x31, "Hangul"),
    c(0xD1D9, None, "HANGUL SYLLABLE TWAEG", 0x31, "Hangul"),
    c(0xD1DA, None, "HANGUL SYLLABLE TWAEGG", 0x31, "Hangul"),
    c(0xD1DB, None, "HANGUL SYLLABLE TWAEGS", 0x31, "Hangul"),
    c(0xD1DC, None, "HANGUL SYLLABLE TWAEN", 0x31, "Hangul"),
    c(0xD1DD, None, "HANGUL SYLLABLE TWAENJ", 0x31, "Hangul"),
    c(0xD1DE, None, "HANGUL SYLLABLE TWAENH", 0x31, "Hangul"),
    c(0xD1DF, None, "HANGUL SYLLABLE TWAED", 0x31, "Hangul"),
    c(0xD1E0, None, "HANGUL SYLLABLE TWAEL", 0x31, "Hangul"),
    c(0xD1E1, None, "HANGUL SYLLABLE TWAELG", 0x31, "Hangul"),
    c(0xD1E2, None, "HANGUL SYLLABLE TWAELM", 0x31, "Hangul"),
    c(0xD1E3, None, "HANGUL SYLLABLE TWAELB", 0x31, "Hangul"),
    c(0xD1E4, None, "HANGUL SYLLABLE TWAELS", 0x31, "Hangul"),
    c(0xD1E5, None, "HANGUL SYLLABLE TWAELT", 0x31, "Hangul"),
    c(0xD1E6, None, "HANGUL SYLLABLE TWAELP", 0x31, "Hangul"),
    c(0xD1E7, None, "HANGUL SYLLABLE TWAELH", 0x31, "Hangul"),
    c(0xD1E8, None, "HANGUL SYLLABLE TWAEM", 0x31, "Hangul"),
    c(0xD1E9, None, "HANGUL SYLLABLE TWAEB", 0x31, "Hangul"),
    c(0xD1EA, None, "HANGUL SYLLABLE TWAEBS", 0x31, "Hangul"),
    c(0xD1EB, None, "HANGUL SYLLABLE TWAES", 0x31, "Hangul"),
    c(0xD1EC, None, "HANGUL SYLLABLE TWAESS", 0x31, "Hangul"),
    c(0xD1ED, None, "HANGUL SYLLABLE TWAENG", 0x31, "Hangul"),
    c(0xD1EE, None, "HANGUL SYLLABLE TWAEJ", 0x31, "Hangul"),
    c(0xD1EF, None, "HANGUL SYLLABLE TWAEC", 0x31, "Hangul"),
    c(0xD1F0, None, "HANGUL SYLLABLE TWAEK", 0x31, "Hangul"),
    c(0xD1F1, None, "HANGUL SYLLABLE TWAET", 0x31, "Hangul"),
    c(0xD1F2, None, "HANGUL SYLLABLE TWAEP", 0x31, "Hangul"),
    c(0xD1F3, None, "HANGUL SYLLABLE TWAEH", 0x31, "Hangul"),
    c(0xD1F4, None, "HANGUL SYLLABLE TOE", 0x31, "Hangul"),
    c(0xD1F5, None, "HANGUL SYLLABLE TOEG", 0x31, "Hangul"),
    c(0xD1F6, None, "HANGUL SYLLABLE TOEGG", 0x31, "Hangul"),
    c(0xD1F7, None, "HANGUL SYLLABLE TOEGS", 0x31, "Hangul"),
    c(0xD1F8, None, "HANGUL SYLLABLE TOEN", 0x31, "Hangul"),
    c(0xD1F9, None, "HANGUL SYLLABLE TOENJ", 0x31, "Hangul"),
    c(0xD1FA, None, "HANGUL SYLLABLE TOENH", 0x31, "Hangul"),
    c(0xD1FB, None, "HANGUL SYLLABLE TOED", 0x31, "Hangul"),
    c(0xD1FC, None, "HANGUL SYLLABLE TOEL", 0x31, "Hangul"),
    c(0xD1FD, None, "HANGUL SYLLABLE TOELG", 0x31, "Hangul"),
    c(0xD1FE, None, "HANGUL SYLLABLE TOELM", 0x31, "Hangul"),
    c(0xD1FF, None, "HANGUL SYLLABLE TOELB", 0x31, "Hangul"),
    c(0xD200, None, "HANGUL SYLLABLE TOELS", 0x31, "Hangul"),
    c(0xD201, None, "HANGUL SYLLABLE TOELT", 0x31, "Hangul"),
    c(0xD202, None, "HANGUL SYLLABLE TOELP", 0x31, "Hangul"),
    c(0xD203, None, "HANGUL SYLLABLE TOELH", 0x31, "Hangul"),
    c(0xD204, None, "HANGUL SYLLABLE TOEM", 0x31, "Hangul"),
    c(0xD205, None, "HANGUL SYLLABLE TOEB", 0x31, "Hangul"),
    c(0xD206, None, "HANGUL SYLLABLE TOEBS", 0x31, "Hangul"),
    c(0xD207, None, "HANGUL SYLLABLE TOES", 0x31, "Hangul"),
    c(0xD208, None, "HANGUL SYLLABLE TOESS", 0x31, "Hangul"),
    c(0xD209, None, "HANGUL SYLLABLE TOENG", 0x31, "Hangul"),
    c(0xD20A, None, "HANGUL SYLLABLE TOEJ", 0x31, "Hangul"),
    c(0xD20B, None, "HANGUL SYLLABLE TOEC", 0x31, "Hangul"),
    c(0xD20C, None, "HANGUL SYLLABLE TOEK", 0x31, "Hangul"),
    c(0xD20D, None, "HANGUL SYLLABLE TOET", 0x31, "Hangul"),
    c(0xD20E, None, "HANGUL SYLLABLE TOEP", 0x31, "Hangul"),
    c(0xD20F, None, "HANGUL SYLLABLE TOEH", 0x31, "Hangul"),
    c(0xD210, None, "HANGUL SYLLABLE TYO", 0x31, "Hangul"),
    c(0xD211, None, "HANGUL SYLLABLE TYOG", 0x31, "Hangul"),
    c(0xD212, None, "HANGUL SYLLABLE TYOGG", 0x31, "Hangul"),
    c(0xD213, None, "HANGUL SYLLABLE TYOGS", 0x31, "Hangul"),
    c(0xD214, None, "HANGUL SYLLABLE TYON", 0x31, "Hangul"),
    c(0xD215, None, "HANGUL SYLLABLE TYONJ", 0x31, "Hangul"),
    c(0xD216, None, "HANGUL SYLLABLE TYONH", 0x31, "Hangul"),
    c(0xD217, None, "HANGUL SYLLABLE TYOD", 0x31, "Hangul"),
    c(0xD218, None, "HANGUL SYLLABLE TYOL", 0x31, "Hangul"),
    c(0xD219, None, "HANGUL SYLLABLE TYOLG", 0x31, "Hangul"),
    c(0xD21A, None, "HANGUL SYLLABLE TYOLM", 0x31, "Hangul"),
    c(0xD21B, None, "HANGUL SYLLABLE TYOLB", 0x31, "Hangul"),
    c(0xD21C, None, "HANGUL SYLLABLE TYOLS", 0x31, "Hangul"),
    c(0xD21D, None, "HANGUL SYLLABLE TYOLT", 0x31, "Hangul"),
    c(0xD21E, None, "HANGUL SYLLABLE TYOLP", 0x31, "Hangul"),
    c(0xD21F, None, "HANGUL SYLLABLE TYOLH", 0x31, "Hangul"),
    c(0xD220, None, "HANGUL SYLLABLE TYOM", 0x31, "Hangul"),
    c(0xD221, None, "HANGUL SYLLABLE TYOB", 0x31, "Hangul"),
    c(0xD222, None, "HANGUL SYLLABLE TYOBS", 0x31, "Hangul"),
    c(0xD223, None, "HANGUL SYLLABLE TYOS", 0x31, "Hangul"),
    c(0xD224, None, "HANGUL SYLLABLE TYOSS", 0x31, "Hangul"),
    c(0xD225, None, "HANGUL SYLLABLE TYONG", 0x31, "Hangul"),
    c(0xD226, None, "HANGUL SYLLABLE TYOJ", 0x31, "Hangul"),
    c(0xD227, None, "HANGUL SYLLABLE TYOC", 0x31, "Hangul"),
    c(0xD228, None, "HANGUL SYLLABLE TYOK", 0x31, "Hangul"),
    c(0xD229, None, "HANGUL SYLLABLE TYOT", 0x31, "Hangul"),
    c(0xD22A, None, "HANGUL SYLLABLE TYOP", 0x31, "Hangul"),
    c(0xD22B, None, "HANGUL SYLLABLE TYOH", 0x31, "Hangul"),
    c(0xD22C, None, "HANGUL SYLLABLE TU", 0x31, "Hangul"),
    c(0xD22D, None, "HANGUL SYLLABLE TUG", 0x31, "Hangul"),
    c(0xD22E, None, "HANGUL SYLLABLE TUGG", 0x31, "Hangul"),
    c(0xD22F, None, "HANGUL SYLLABLE TUGS", 0x31, "Hangul"),
    c(0xD230, None, "HANGUL SYLLABLE TUN", 0x31, "Hangul"),
    c(0xD231, None, "HANGUL SYLLABLE TUNJ", 0x31, "Hangul"),
    c(0xD232, None, "HANGUL SYLLABLE TUNH", 0x31, "Hangul"),
    c(0xD233, None, "HANGUL SYLLABLE TUD", 0x31, "Hangul"),
    c(0xD234, None, "HANGUL SYLLABLE TUL", 0x31, "Hangul"),
    c(0xD235, None, "HANGUL SYLLABLE TULG", 0x31, "Hangul"),
    c(0xD236, None, "HANGUL SYLLABLE TULM", 0x31, "Hangul"),
    c(0xD237, None, "HANGUL SYLLABLE TULB", 0x31, "Hangul"),
    c(0xD238, None, "HANGUL SYLLABLE TULS", 0x31, "Hangul"),
    c(0xD239, None, "HANGUL SYLLABLE TULT", 0x31, "Hangul"),
    c(0xD23A, None, "HANGUL SYLLABLE TULP", 0x31, "Hangul"),
    c(0xD23B, None, "HANGUL SYLLABLE TULH", 0x31, "Hangul"),
    c(0xD23C, None, "HANGUL SYLLABLE TUM", 0x31, "Hangul"),
    c(0xD23D, None, "HANGUL SYLLABLE TUB", 0x31, "Hangul"),
    c(0xD23E, None, "HANGUL SYLLABLE TUBS", 0x31, "Hangul"),
    c(0xD23F, None, "HANGUL SYLLABLE TUS", 0x31, "Hangul"),
    c(0xD240, None, "HANGUL SYLLABLE TUSS", 0x31, "Hangul"),
    c(0xD241, None, "HANGUL SYLLABLE TUNG", 0x31, "Hangul"),
    c(0xD242, None, "HANGUL SYLLABLE TUJ", 0x31, "Hangul"),
    c(0xD243, None, "HANGUL SYLLABLE TUC", 0x31, "Hangul"),
    c(0xD244, None, "HANGUL SYLLABLE TUK", 0x31, "Hangul"),
    c(0xD245, None, "HANGUL SYLLABLE TUT", 0x31, "Hangul"),
    c(0xD246, None, "HANGUL SYLLABLE TUP", 0x31, "Hangul"),
    c(0xD247, None, "HANGUL SYLLABLE TUH", 0x31, "Hangul"),
    c(0xD248, None, "HANGUL SYLLABLE TWEO", 0x31, "Hangul"),
    c(0xD249, None, "HANGUL SYLLABLE TWEOG", 0x31, "Hangul"),
    c(0xD24A, None, "HANGUL SYLLABLE TWEOGG", 0x31, "Hangul"),
    c(0xD24B, None, "HANGUL SYLLABLE TWEOGS", 0x31, "Hangul"),
    c(0xD24C, None, "HANGUL SYLLABLE TWEON", 0x31, "Hangul"),
    c(0xD24D, None, "HANGUL SYLLABLE TWEONJ", 0x31, "Hangul"),
    c(0xD24E, None, "HANGUL SYLLABLE TWEONH", 0x31, "Hangul"),
    c(0xD24F, None, "HANGUL SYLLABLE TWEOD", 0x31, "Hangul"),
    c(0xD250, None, "HANGUL SYLLABLE TWEOL", 0x31, "Hangul"),
    c(0xD251, None, "HANGUL SYLLABLE TWEOLG", 0x31, "Hangul"),
    c(0xD252, None, "HANGUL SYLLABLE TWEOLM", 0x31, "Hangul"),
    c(0xD253, None, "HANGUL SYLLABLE TWEOLB", 0x31, "Hangul"),
    c(0xD254, None, "HANGUL SYLLABLE TWEOLS", 0x31, "Hangul"),
    c(0xD255, None, "HANGUL SYLLABLE TWEOLT", 0x31, "Hangul"),
    c(0xD256, None, "HANGUL SYLLABLE TWEOLP", 0x31, "Hangul"),
    c(0xD257, None, "HANGUL SYLLABLE TWEOLH", 0x31, "Hangul"),
    c(0xD258, None, "HANGUL SYLLABLE TWEOM", 0x31, "Hangul"),
    c(0xD259, None, "HANGUL SYLLABLE TWEOB", 0x31, "Hangul"),
    c(0xD25A, None, "HANGUL SYLLABLE TWEOBS", 0x31, "Hangul"),
    c(0xD25B, None, "HANGUL SYLLABLE TWEOS", 0x31, "Hangul"),
    c(0xD25C, None, "HANGUL SYLLABLE TWEOSS", 0x31, "Hangul"),
    c(0xD25D, None, "HANGUL SYLLABLE TWEONG", 0x31, "Hangul"),
    c(0xD25E, None, "HANGUL SYLLABLE TWEOJ", 0x31, "Hangul"),
    c(0xD25F, None, "HANGUL SYLLABLE TWEOC", 0x31, "Hangul"),
    c(0xD260, None, "HANGUL SYLLABLE TWEOK", 0x31, "Hangul"),
    c(0xD261, None, "HANGUL SYLLABLE TWEOT", 0x31, "Hangul"),
    c(0xD262, None, "HANGUL SYLLABLE TWEOP", 0x31, "Hangul"),
    c(0xD263, None, "HANGUL SYLLABLE TWEOH", 0x31, "Hangul"),
    c(0xD264, None, "HANGUL SYLLABLE TWE", 0x31, "Hangul"),
    c(0xD265, None, "HANGUL SYLLABLE TWEG", 0x31, "Hangul"),
    c(0xD266, None, "HANGUL SYLLABLE TWEGG", 0x31, "Hangul"),
    c(0xD267, None, "HANGUL SYLLABLE TWEGS", 0x31, "Hangul"),
    c(0xD268, None, "HANGUL SYLLABLE TWEN", 0x31, "Hangul"),
    c(0xD269, None, "HANGUL SYLLABLE TWENJ", 0x31, "Hangul"),
    c(0xD26A, None, "HANGUL SYLLABLE TWENH", 0x31, "Hangul"),
    c(0xD26B, None, "HANGUL SYLLABLE TWED", 0x31, "Hangul"),
    c(0xD26C, None, "HANGUL SYLLABLE TWEL", 0x31, "Hangul"),
    c(0xD26D, None, "HANGUL SYLLABLE TWELG", 0x31, "Hangul"),
    c(0xD26E, None, "HANGUL SYLLABLE TWELM", 0x31, "Hangul"),
    c(0xD26F, None, "HANGUL SYLLABLE TWELB", 0x31, "Hangul"),
    c(0xD270, None, "HANGUL SYLLABLE TWELS", 0x31, "Hangul"),
    c(0xD271, None, "HANGUL SYLLABLE TWELT", 0x31, "Hangul"),
    c(0xD272, None, "HANGUL SYLLABLE TWELP", 0x31, "Hangul"),
    c(0xD273, None, "HANGUL SYLLABLE TWELH", 0x31, "Hangul"),
    c(0xD274, None, "HANGUL SYLLABLE TWEM", 0x31, "Hangul"),
    c(0xD275, None, "HANGUL SYLLABLE TWEB", 0x31, "Hangul"),
    c(0xD276, None, "HANGUL SYLLABLE TWEBS", 0x31, "Hangul"),
    c(0xD277, None, "HANGUL SYLLABLE TWES", 0x31, "Hangul"),
    c(0xD278, None, "HANGUL SYLLABLE TWESS", 0x31, "Hangul"),
    c(0xD279, None, "HANGUL SYLLABLE TWENG", 0x31, "Hangul"),
    c(0xD27A, None, "HANGUL SYLLABLE TWEJ", 0x31, "Hangul"),
    c(0xD27B, None, "HANGUL SYLLABLE TWEC", 0x31, "Hangul"),
    c(0xD27C, None, "HANGUL SYLLABLE TWEK", 0x31, "Hangul"),
    c(0xD27D, None, "HANGUL SYLLABLE TWET", 0x31, "Hangul"),
    c(0xD27E, None, "HANGUL SYLLABLE TWEP", 0x31, "Hangul"),
    c(0xD27F, None, "HANGUL SYLLABLE TWEH", 0x31, "Hangul"),
    c(0xD280, None, "HANGUL SYLLABLE TWI", 0x31, "Hangul"),
    c(0xD281, None, "HANGUL SYLLABLE TWIG", 0x31, "Hangul"),
    c(0xD282, None, "HANGUL SYLLABLE TWIGG", 0x31, "Hangul"),
    c(0xD283, None, "HANGUL SYLLABLE TWIGS", 0x31, "Hangul"),
    c(0xD284, None, "HANGUL SYLLABLE TWIN", 0x31, "Hangul"),
    c(0xD285, None, "HANGUL SYLLABLE TWINJ", 0x31, "Hangul"),
    c(0xD286, None, "HANGUL SYLLABLE TWINH", 0x31, "Hangul"),
    c(0xD287, None, "HANGUL SYLLABLE TWID", 0x31, "Hangul"),
    c(0xD288, None, "HANGUL SYLLABLE TWIL", 0x31, "Hangul"),
    c(0xD289, None, "HANGUL SYLLABLE TWILG", 0x31, "Hangul"),
    c(0xD28A, None, "HANGUL SYLLABLE TWILM", 0x31, "Hangul"),
    c(0xD28B, None, "HANGUL SYLLABLE TWILB", 0x31, "Hangul"),
    c(0xD28C, None, "HANGUL SYLLABLE TWILS", 0x31, "Hangul"),
    c(0xD28D, None, "HANGUL SYLLABLE TWILT", 0x31, "Hangul"),
    c(0xD28E, None, "HANGUL SYLLABLE TWILP", 0x31, "Hangul"),
    c(0xD28F, None, "HANGUL SYLLABLE TWILH", 0x31, "Hangul"),
    c(0xD290, None, "HANGUL SYLLABLE TWIM", 0x31, "Hangul"),
    c(0xD291, None, "HANGUL SYLLABLE TWIB", 0x31, "Hangul"),
    c(0xD292, None, "HANGUL SYLLABLE TWIBS", 0x31, "Hangul"),
    c(0xD293, None, "HANGUL SYLLABLE TWIS", 0x31, "Hangul"),
    c(0xD294, None, "HANGUL SYLLABLE TWISS", 0x31, "Hangul"),
    c(0xD295, None, "HANGUL SYLLABLE TWING", 0x31, "Hangul"),
    c(0xD296, None, "HANGUL SYLLABLE TWIJ", 0x31, "Hangul"),
    c(0xD297, None, "HANGUL SYLLABLE TWIC", 0x31, "Hangul"),
    c(0xD298, None, "HANGUL SYLLABLE TWIK", 0x31, "Hangul"),
    c(0xD299, None, "HANGUL SYLLABLE TWIT", 0x31, "Hangul"),
    c(0xD29A, None, "HANGUL SYLLABLE TWIP", 0x31, "Hangul"),
    c(0xD29B, None, "HANGUL SYLLABLE TWIH", 0x31, "Hangul"),
    c(0xD29C, None, "HANGUL SYLLABLE TYU", 0x31, "Hangul"),
    c(0xD29D, None, "HANGUL SYLLABLE TYUG", 0x31, "Hangul"),
    c(0xD29E, None, "HANGUL SYLLABLE TYUGG", 0x31, "Hangul"),
    c(0xD29F, None, "HANGUL SYLLABLE TYUGS", 0x31, "Hangul"),
    c(0xD2A0, None, "HANGUL SYLLABLE TYUN", 0x31, "Hangul"),
    c(0xD2A1, None, "HANGUL SYLLABLE TYUNJ", 0x31, "Hangul"),
    c(0xD2A2, None, "HANGUL SYLLABLE TYUNH", 0x31, "Hangul"),
    c(0xD2A3, None, "HANGUL SYLLABLE TYUD", 0x31, "Hangul"),
    c(0xD2A4, None, "HANGUL SYLLABLE TYUL", 0x31, "Hangul"),
    c(0xD2A5, None, "HANGUL SYLLABLE TYULG", 0x31, "Hangul"),
    c(0xD2A6, None, "HANGUL SYLLABLE TYULM", 0x31, "Hangul"),
    c(0xD2A7, None, "HANGUL SYLLABLE TYULB", 0x31, "Hangul"),
    c(0xD2A8, None, "HANGUL SYLLABLE TYULS", 0x31, "Hangul"),
    c(0xD2A9, None, "HANGUL SYLLABLE TYULT", 0x31, "Hangul"),
    c(0xD2AA, None, "HANGUL SYLLABLE TYULP", 0x31, "Hangul"),
    c(0xD2AB, None, "HANGUL SYLLABLE TYULH", 0x31, "Hangul"),
    c(0xD2AC, None, "HANGUL SYLLABLE TYUM", 0x31, "Hangul"),
    c(0xD2AD, None, "HANGUL SYLLABLE TYUB", 0x31, "Hangul"),
    c(0xD2AE, None, "HANGUL SYLLABLE TYUBS", 0x31, "Hangul"),
    c(0xD2AF, None, "HANGUL SYLLABLE TYUS", 0x31, "Hangul"),
    c(0xD2B0, None, "HANGUL SYLLABLE TYUSS", 0x31, "Hangul"),
    c(0xD2B1, None, "HANGUL SYLLABLE TYUNG", 0x31, "Hangul"),
    c(0xD2B2, None, "HANGUL SYLLABLE TYUJ", 0x31, "Hangul"),
    c(0xD2B3, None, "HANGUL SYLLABLE TYUC", 0x31, "Hangul"),
    c(0xD2B4, None, "HANGUL SYLLABLE TYUK", 0x31, "Hangul"),
    c(0xD2B5, None, "HANGUL SYLLABLE TYUT", 0x31, "Hangul"),
    c(0xD2B6, None, "HANGUL SYLLABLE TYUP", 0x31, "Hangul"),
    c(0xD2B7, None, "HANGUL SYLLABLE TYUH", 0x31, "Hangul"),
    c(0xD2B8, None, "HANGUL SYLLABLE TEU", 0x31, "Hangul"),
    c(0xD2B9, None, "HANGUL SYLLABLE TEUG", 0x31, "Hangul"),
    c(0xD2BA, None, "HANGUL SYLLABLE TEUGG", 0x31, "Hangul"),
    c(0xD2BB, None, "HANGUL SYLLABLE TEUGS", 0x31, "Hangul"),
    c(0xD2BC, None, "HANGUL SYLLABLE TEUN", 0x31, "Hangul"),
    c(0xD2BD, None, "HANGUL SYLLABLE TEUNJ", 0x31, "Hangul"),
    c(0xD2BE, None, "HANGUL SYLLABLE TEUNH", 0x31, "Hangul"),
    c(0xD2BF, None, "HANGUL SYLLABLE TEUD", 0x31, "Hangul"),
    c(0xD2C0, None, "HANGUL SYLLABLE TEUL", 0x31, "Hangul"),
    c(0xD2C1, None, "HANGUL SYLLABLE TEULG", 0x31, "Hangul"),
    c(0xD2C2, None, "HANGUL SYLLABLE TEULM", 0x31, "Hangul"),
    c(0xD2C3, None, "HANGUL SYLLABLE TEULB", 0x31, "Hangul"),
    c(0xD2C4, None, "HANGUL SYLLABLE TEULS", 0x31, "Hangul"),
    c(0xD2C5, None, "HANGUL SYLLABLE TEULT", 0x31, "Hangul"),
    c(0xD2C6, None, "HANGUL SYLLABLE TEULP", 0x31, "Hangul"),
    c(0xD2C7, None, "HANGUL SYLLABLE TEULH", 0x31, "Hangul"),
    c(0xD2C8, None, "HANGUL SYLLABLE TEUM", 0x31, "Hangul"),
    c(0xD2C9, None, "HANGUL SYLLABLE TEUB", 0x31, "Hangul"),
    c(0xD2CA, None, "HANGUL SYLLABLE TEUBS", 0x31, "Hangul"),
    c(0xD2CB, None, "HANGUL SYLLABLE TEUS", 0x31, "Hangul"),
    c(0xD2CC, None, "HANGUL SYLLABLE TEUSS", 0x31, "Hangul"),
    c(0xD2CD, None, "HANGUL SYLLABLE TEUNG", 0x31, "Hangul"),
    c(0xD2CE, None, "HANGUL SYLLABLE TEUJ", 0x31, "Hangul"),
    c(0xD2CF, None, "HANGUL SYLLABLE TEUC", 0x31, "Hangul"),
    c(0xD2D0, None, "HANGUL SYLLABLE TEUK", 0x31, "Hangul"),
    c(0xD2D1, None, "HANGUL SYLLABLE TEUT", 0x31, "Hangul"),
    c(0xD2D2, None, "HANGUL SYLLABLE TEUP", 0x31, "Hangul"),
    c(0xD2D3, None, "HANGUL SYLLABLE TEUH", 0x31, "Hangul"),
    c(0xD2D4, None, "HANGUL SYLLABLE TYI", 0x31, "Hangul"),
    c(0xD2D5, None, "HANGUL SYLLABLE TYIG", 0x31, "Hangul"),
    c(0xD2D6, None, "HANGUL SYLLABLE TYIGG", 0x31, "Hangul"),
    c(0xD2D7, None, "HANGUL SYLLABLE TYIGS", 0x31, "Hangul"),
    c(0xD2D8, None, "HANGUL SYLLABLE TYIN", 0x31, "Hangul"),
    c(0xD2D9, None, "HANGUL SYLLABLE TYINJ", 0x31, "Hangul"),
    c(0xD2DA, None, "HANGUL SYLLABLE TYINH", 0x31, "Hangul"),
    c(0xD2DB, None, "HANGUL SYLLABLE TYID", 0x31, "Hangul"),
    c(0xD2DC, None, "HANGUL SYLLABLE TYIL", 0x31, "Hangul"),
    c(0xD2DD, None, "HANGUL SYLLABLE TYILG", 0x31, "Hangul"),
    c(0xD2DE, None, "HANGUL SYLLABLE TYILM", 0x31, "Hangul"),
    c(0xD2DF, None, "HANGUL SYLLABLE TYILB", 0x31, "Hangul"),
    c(0xD2E0, None, "HANGUL SYLLABLE TYILS", 0x31, "Hangul"),
    c(0xD2E1, None, "HANGUL SYLLABLE TYILT", 0x31, "Hangul"),
    c(0xD2E2, None, "HANGUL SYLLABLE TYILP", 0x31, "Hangul"),
    c(0xD2E3, None, "HANGUL SYLLABLE TYILH", 0x31, "Hangul"),
    c(0xD2E4, None, "HANGUL SYLLABLE TYIM", 0x31, "Hangul"),
    c(0xD2E5, None, "HANGUL SYLLABLE TYIB", 0x31, "Hangul"),
    c(0xD2E6, None, "HANGUL SYLLABLE TYIBS", 0x31, "Hangul"),
    c(0xD2E7, None, "HANGUL SYLLABLE TYIS", 0x31, "Hangul"),
    c(0xD2E8, None, "HANGUL SYLLABLE TYISS", 0x31, "Hangul"),
    c(0xD2E9, None, "HANGUL SYLLABLE TYING", 0x31, "Hangul"),
    c(0xD2EA, None, "HANGUL SYLLABLE TYIJ", 0x31, "Hangul"),
    c(0xD2EB, None, "HANGUL SYLLABLE TYIC", 0x31, "Hangul"),
    c(0xD2EC, None, "HANGUL SYLLABLE TYIK", 0x31, "Hangul"),
    c(0xD2ED, None, "HANGUL SYLLABLE TYIT", 0x31, "Hangul"),
    c(0xD2EE, None, "HANGUL SYLLABLE TYIP", 0x31, "Hangul"),
    c(0xD2EF, None, "HANGUL SYLLABLE TYIH", 0x31, "Hangul"),
    c(0xD2F0, None, "HANGUL SYLLABLE TI", 0x31, "Hangul"),
    c(0xD2F1, None, "HANGUL SYLLABLE TIG", 0x31, "Hangul"),
    c(0xD2F2, None, "HANGUL SYLLABLE TIGG", 0x31, "Hangul"),
    c(0xD2F3, None, "HANGUL SYLLABLE TIGS", 0x31, "Hangul"),
    c(0xD2F4, None, "HANGUL SYLLABLE TIN", 0x31, "Hangul"),
    c(0xD2F5, None, "HANGUL SYLLABLE TINJ", 0x31, "Hangul"),
    c(0xD2F6, None, "HANGUL SYLLABLE TINH", 0x31, "Hangul"),
    c(0xD2F7, None, "HANGUL SYLLABLE TID", 0x31, "Hangul"),
    c(0xD2F8, None, "HANGUL SYLLABLE TIL", 0x31, "Hangul"),
    c(0xD2F9, None, "HANGUL SYLLABLE TILG", 0x31, "Hangul"),
    c(0xD2FA, None, "HANGUL SYLLABLE TILM", 0x31, "Hangul"),
    c(0xD2FB, None, "HANGUL SYLLABLE TILB", 0x31, "Hangul"),
    c(0xD2FC, None, "HANGUL SYLLABLE TILS", 0x31, "Hangul"),
    c(0xD2FD, None, "HANGUL SYLLABLE TILT", 0x31, "Hangul"),
    c(0xD2FE, None, "HANGUL SYLLABLE TILP", 0x31, "Hangul"),
    c(0xD2FF, None, "HANGUL SYLLABLE TILH", 0x31, "Hangul"),
    c(0xD300, None, "HANGUL SYLLABLE TIM", 0x31, "Hangul"),
    c(0xD301, None, "HANGUL SYLLABLE TIB", 0x31, "Hangul"),
    c(0xD302, None, "HANGUL SYLLABLE TIBS", 0x31, "Hangul"),
    c(0xD303, None, "HANGUL SYLLABLE TIS", 0x31, "Hangul"),
    c(0xD304, None, "HANGUL SYLLABLE TISS", 0x31, "Hangul"),
    c(0xD305, None, "HANGUL SYLLABLE TING", 0x31, "Hangul"),
    c(0xD306, None, "HANGUL SYLLABLE TIJ", 0x31, "Hangul"),
    c(0xD307, None, "HANGUL SYLLABLE TIC", 0x31, "Hangul"),
    c(0xD308, None, "HANGUL SYLLABLE TIK", 0x31, "Hangul"),
    c(0xD309, None, "HANGUL SYLLABLE TIT", 0x31, "Hangul"),
    c(0xD30A, None, "HANGUL SYLLABLE TIP", 0x31, "Hangul"),
    c(0xD30B, None, "HANGUL SYLLABLE TIH", 0x31, "Hangul"),
    c(0xD30C, None, "HANGUL SYLLABLE PA", 0x31, "Hangul"),
    c(0xD30D, None, "HANGUL SYLLABLE PAG", 0x31, "Hangul"),
    c(0xD30E, None, "HANGUL SYLLABLE PAGG", 0x31, "Hangul"),
    c(0xD30F, None, "HANGUL SYLLABLE PAGS", 0x31, "Hangul"),
    c(0xD310, None, "HANGUL SYLLABLE PAN", 0x31, "Hangul"),
    c(0xD311, None, "HANGUL SYLLABLE PANJ", 0x31, "Hangul"),
    c(0xD312, None, "HANGUL SYLLABLE PANH", 0x31, "Hangul"),
    c(0xD313, None, "HANGUL SYLLABLE PAD", 0x31, "Hangul"),
    c(0xD314, None, "HANGUL SYLLABLE PAL", 0x31, "Hangul"),
    c(0xD315, None, "HANGUL SYLLABLE PALG", 0x31, "Hangul"),
    c(0xD316, None, "HANGUL SYLLABLE PALM", 0x31, "Hangul"),
    c(0xD317, None, "HANGUL SYLLABLE PALB", 0x31, "Hangul"),
    c(0xD318, None, "HANGUL SYLLABLE PALS", 0x31, "Hangul"),
    c(0xD319, None, "HANGUL SYLLABLE PALT", 0x31, "Hangul"),
    c(0xD31A, None, "HANGUL SYLLABLE PALP", 0x31, "Hangul"),
    c(0xD31B, None, "HANGUL SYLLABLE PALH", 0x31, "Hangul"),
    c(0xD31C, None, "HANGUL SYLLABLE PAM", 0x31, "Hangul"),
    c(0xD31D, None, "HANGUL SYLLABLE PAB", 0x31, "Hangul"),
    c(0xD31E, None, "HANGUL SYLLABLE PABS", 0x31, "Hangul"),
    c(0xD31F, None, "HANGUL SYLLABLE PAS", 0x31, "Hangul"),
    c(0xD320, None, "HANGUL SYLLABLE PASS", 0x31, "Hangul"),
    c(0xD321, None, "HANGUL SYLLABLE PANG", 0x31, "Hangul"),
    c(0xD322, None, "HANGUL SYLLABLE PAJ", 0x31, "Hangul"),
    c(0xD323, None, "HANGUL SYLLABLE PAC", 0x31, "Hangul"),
    c(0xD324, None, "HANGUL SYLLABLE PAK", 0x31, "Hangul"),
    c(0xD325, None, "HANGUL SYLLABLE PAT", 0x31, "Hangul"),
    c(0xD326, None, "HANGUL SYLLABLE PAP", 0x31, "Hangul"),
    c(0xD327, None, "HANGUL SYLLABLE PAH", 0x31, "Hangul"),
    c(0xD328, None, "HANGUL SYLLABLE PAE", 0x31, "Hangul"),
    c(0xD329, None, "HANGUL SYLLABLE PAEG", 0x31, "Hangul"),
    c(0xD32A, None, "HANGUL SYLLABLE PAEGG", 0x31, "Hangul"),
    c(0xD32B, None, "HANGUL SYLLABLE PAEGS", 0x31, "Hangul"),
    c(0xD32C, None, "HANGUL SYLLABLE PAEN", 0x31, "Hangul"),
    c(0xD32D, None, "HANGUL SYLLABLE PAENJ", 0x31, "Hangul"),
    c(0xD32E, None, "HANGUL SYLLABLE PAENH", 0x31, "Hangul"),
    c(0xD32F, None, "HANGUL SYLLABLE PAED", 0x31, "Hangul"),
    c(0xD330, None, "HANGUL SYLLABLE PAEL", 0x31, "Hangul"),
    c(0xD331, None, "HANGUL SYLLABLE PAELG", 0x31, "Hangul"),
    c(0xD332, None, "HANGUL SYLLABLE PAELM", 0x31, "Hangul"),
    c(0xD333, None, "HANGUL SYLLABLE PAELB", 0x31, "Hangul"),
    c(0xD334, None, "HANGUL SYLLABLE PAELS", 0x31, "Hangul"),
    c(0xD335, None, "HANGUL SYLLABLE PAELT", 0x31, "Hangul"),
    c(0xD336, None, "HANGUL SYLLABLE PAELP", 0x31, "Hangul"),
    c(0xD337, None, "HANGUL SYLLABLE PAELH", 0x31, "Hangul"),
    c(0xD338, None, "HANGUL SYLLABLE PAEM", 0x31, "Hangul"),
    c(0xD339, None, "HANGUL SYLLABLE PAEB", 0x31, "Hangul"),
    c(0xD33A, None, "HANGUL SYLLABLE PAEBS", 0x31, "Hangul"),
    c(0xD33B, None, "HANGUL SYLLABLE PAES", 0x31, "Hangul"),
    c(0xD33C, None, "HANGUL SYLLABLE PAESS", 0x31, "Hangul"),
    c(0xD33D, None, "HANGUL SYLLABLE PAENG", 0x31, "Hangul"),
    c(0xD33E, None, "HANGUL SYLLABLE PAEJ", 0x31, "Hangul"),
    c(0xD33F, None, "HANGUL SYLLABLE PAEC", 0x31, "Hangul"),
    c(0xD340, None, "HANGUL SYLLABLE PAEK", 0x31, "Hangul"),
    c(0xD341, None, "HANGUL SYLLABLE PAET", 0x31, "Hangul"),
    c(0xD342, None, "HANGUL SYLLABLE PAEP", 0x31, "Hangul"),
    c(0xD343, None, "HANGUL SYLLABLE PAEH", 0x31, "Hangul"),
    c(0xD344, None, "HANGUL SYLLABLE PYA", 0x31, "Hangul"),
    c(0xD345, None, "HANGUL SYLLABLE PYAG", 0x31, "Hangul"),
    c(0xD346, None, "HANGUL SYLLABLE PYAGG", 0x31, "Hangul"),
    c(0xD347, None, "HANGUL SYLLABLE PYAGS", 0x31, "Hangul"),
    c(0xD348, None, "HANGUL SYLLABLE PYAN", 0x31, "Hangul"),
    c(0xD349, None, "HANGUL SYLLABLE PYANJ", 0x31, "Hangul"),
    c(0xD34A, None, "HANGUL SYLLABLE PYANH", 0x31, "Hangul"),
    c(0xD34B, None, "HANGUL SYLLABLE PYAD", 0x31, "Hangul"),
    c(0xD34C, None, "HANGUL SYLLABLE PYAL", 0x31, "Hangul"),
    c(0xD34D, None, "HANGUL SYLLABLE PYALG", 0x31, "Hangul"),
    c(0xD34E, None, "HANGUL SYLLABLE PYALM", 0x31, "Hangul"),
    c(0xD34F, None, "HANGUL SYLLABLE PYALB", 0x31, "Hangul"),
    c(0xD350, None, "HANGUL SYLLABLE PYALS", 0x31, "Hangul"),
    c(0xD351, None, "HANGUL SYLLABLE PYALT", 0x31, "Hangul"),
    c(0xD352, None, "HANGUL SYLLABLE PYALP", 0x31, "Hangul"),
    c(0xD353, None, "HANGUL SYLLABLE PYALH", 0x31, "Hangul"),
    c(0xD354, None, "HANGUL SYLLABLE PYAM", 0x31, "Hangul"),
    c(0xD355, None, "HANGUL SYLLABLE PYAB", 0x31, "Hangul"),
    c(0xD356, None, "HANGUL SYLLABLE PYABS", 0x31, "Hangul"),
    c(0xD357, None, "HANGUL SYLLABLE PYAS", 0x31, "Hangul"),
    c(0xD358, None, "HANGUL SYLLABLE PYASS", 0x31, "Hangul"),
    c(0xD359, None, "HANGUL SYLLABLE PYANG", 0x31, "Hangul"),
    c(0xD35A, None, "HANGUL SYLLABLE PYAJ", 0x31, "Hangul"),
    c(0xD35B, None, "HANGUL SYLLABLE PYAC", 0x31, "Hangul"),
    c(0xD35C, None, "HANGUL SYLLABLE PYAK", 0x31, "Hangul"),
    c(0xD35D, None, "HANGUL SYLLABLE PYAT", 0x31, "Hangul"),
    c(0xD35E, None, "HANGUL SYLLABLE PYAP", 0x31, "Hangul"),
    c(0xD35F, None, "HANGUL SYLLABLE PYAH", 0x31, "Hangul"),
    c(0xD360, None, "HANGUL SYLLABLE PYAE", 0x31, "Hangul"),
    c(0xD361, None, "HANGUL SYLLABLE PYAEG", 0x31, "Hangul"),
    c(0xD362, None, "HANGUL SYLLABLE PYAEGG", 0x31, "Hangul"),
    c(0xD363, None, "HANGUL SYLLABLE PYAEGS", 0x31, "Hangul"),
    c(0xD364, None, "HANGUL SYLLABLE PYAEN", 0x31, "Hangul"),
    c(0xD365, None, "HANGUL SYLLABLE PYAENJ", 0x31, "Hangul"),
    c(0xD366, None, "HANGUL SYLLABLE PYAENH", 0x31, "Hangul"),
    c(0xD367, None, "HANGUL SYLLABLE PYAED", 0x31, "Hangul"),
    c(0xD368, None, "HANGUL SYLLABLE PYAEL", 0x31, "Hangul"),
    c(0xD369, None, "HANGUL SYLLABLE PYAELG", 0x31, "Hangul"),
    c(0xD36A, None, "HANGUL SYLLABLE PYAELM", 0x31, "Hangul"),
    c(0xD36B, None, "HANGUL SYLLABLE PYAELB", 0x31, "Hangul"),
    c(0xD36C, None, "HANGUL SYLLABLE PYAELS", 0x31, "Hangul"),
    c(0xD36D, None, "HANGUL SYLLABLE PYAELT", 0x31, "Hangul"),
    c(0xD36E, None, "HANGUL SYLLABLE PYAELP", 0x31, "Hangul"),
    c(0xD36F, None, "HANGUL SYLLABLE PYAELH", 0x31, "Hangul"),
    c(0xD370, None, "HANGUL SYLLABLE PYAEM", 0x31, "Hangul"),
    c(0xD371, None, "HANGUL SYLLABLE PYAEB", 0x31, "Hangul"),
    c(0xD372, None, "HANGUL SYLLABLE PYAEBS", 0x31, "Hangul"),
    c(0xD373, None, "HANGUL SYLLABLE PYAES", 0x31, "Hangul"),
    c(0xD374, None, "HANGUL SYLLABLE PYAESS", 0x31, "Hangul"),
    c(0xD375, None, "HANGUL SYLLABLE PYAENG", 0x31, "Hangul"),
    c(0xD376, None, "HANGUL SYLLABLE PYAEJ", 0x31, "Hangul"),
    c(0xD377, None, "HANGUL SYLLABLE PYAEC", 0x31, "Hangul"),
    c(0xD378, None, "HANGUL SYLLABLE PYAEK", 0x31, "Hangul"),
    c(0xD379, None, "HANGUL SYLLABLE PYAET", 0x31, "Hangul"),
    c(0xD37A, None, "HANGUL SYLLABLE PYAEP", 0x31, "Hangul"),
    c(0xD37B, None, "HANGUL SYLLABLE PYAEH", 0x31, "Hangul"),
    c(0xD37C, None, "HANGUL SYLLABLE PEO", 0x31, "Hangul"),
    c(0xD37D, None, "HANGUL SYLLABLE PEOG", 0x31, "Hangul"),
    c(0xD37E, None, "HANGUL SYLLABLE PEOGG", 0x31, "Hangul"),
    c(0xD37F, None, "HANGUL SYLLABLE PEOGS", 0x31, "Hangul"),
    c(0xD380, None, "HANGUL SYLLABLE PEON", 0x31, "Hangul"),
    c(0xD381, None, "HANGUL SYLLABLE PEONJ", 0x31, "Hangul"),
    c(0xD382, None, "HANGUL SYLLABLE PEONH", 0x31, "Hangul"),
    c(0xD383, None, "HANGUL SYLLABLE PEOD", 0x31, "Hangul"),
    c(0xD384, None, "HANGUL SYLLABLE PEOL", 0x31, "Hangul"),
    c(0xD385, None, "HANGUL SYLLABLE PEOLG", 0x31, "Hangul"),
    c(0xD386, None, "HANGUL SYLLABLE PEOLM", 0x31, "Hangul"),
    c(0xD387, None, "HANGUL SYLLABLE PEOLB", 0x31, "Hangul"),
    c(0xD388, None, "HANGUL SYLLABLE PEOLS", 0x31, "Hangul"),
    c(0xD389, None, "HANGUL SYLLABLE PEOLT", 0x31, "Hangul"),
    c(0xD38A, None, "HANGUL SYLLABLE PEOLP", 0x31, "Hangul"),
    c(0xD38B, None, "HANGUL SYLLABLE PEOLH", 0x31, "Hangul"),
    c(0xD38C, None, "HANGUL SYLLABLE PEOM", 0x31, "Hangul"),
    c(0xD38D, None, "HANGUL SYLLABLE PEOB", 0x31, "Hangul"),
    c(0xD38E, None, "HANGUL SYLLABLE PEOBS", 0x31, "Hangul"),
    c(0xD38F, None, "HANGUL SYLLABLE PEOS", 0x31, "Hangul"),
    c(0xD390, None, "HANGUL SYLLABLE PEOSS", 0x31, "Hangul"),
    c(0xD391, None, "HANGUL SYLLABLE PEONG", 0x31, "Hangul"),
    c(0xD392, None, "HANGUL SYLLABLE PEOJ", 0x31, "Hangul"),
    c(0xD393, None, "HANGUL SYLLABLE PEOC", 0x31, "Hangul"),
    c(0xD394, None, "HANGUL SYLLABLE PEOK", 0x31, "Hangul"),
    c(0xD395, None, "HANGUL SYLLABLE PEOT", 0x31, "Hangul"),
    c(0xD396, None, "HANGUL SYLLABLE PEOP", 0x31, "Hangul"),
    c(0xD397, None, "HANGUL SYLLABLE PEOH", 0x31, "Hangul"),
    c(0xD398, None, "HANGUL SYLLABLE PE", 0x31, "Hangul"),
    c(0xD399, None, "HANGUL SYLLABLE PEG", 0x31, "Hangul"),
    c(0xD39A, None, "HANGUL SYLLABLE PEGG", 0x31, "Hangul"),
    c(0xD39B, None, "HANGUL SYLLABLE PEGS", 0x31, "Hangul"),
    c(0xD39C, None, "HANGUL SYLLABLE PEN", 0x31, "Hangul"),
    c(0xD39D, None, "HANGUL SYLLABLE PENJ", 0x31, "Hangul"),
    c(0xD39E, None, "HANGUL SYLLABLE PENH", 0x31, "Hangul"),
    c(0xD39F, None, "HANGUL SYLLABLE PED", 0x31, "Hangul"),
    c(0xD3A0, None, "HANGUL SYLLABLE PEL", 0x31, "Hangul"),
    c(0xD3A1, None, "HANGUL SYLLABLE PELG", 0x31, "Hangul"),
    c(0xD3A2, None, "HANGUL SYLLABLE PELM", 0x31, "Hangul"),
    c(0xD3A3, None, "HANGUL SYLLABLE PELB", 0x31, "Hangul"),
    c(0xD3A4, None, "HANGUL SYLLABLE PELS", 0x31, "Hangul"),
    c(0xD3A5, None, "HANGUL SYLLABLE PELT", 0x31, "Hangul"),
    c(0xD3A6, None, "HANGUL SYLLABLE PELP", 0x31, "Hangul"),
    c(0xD3A7, None, "HANGUL SYLLABLE PELH", 0x31, "Hangul"),
    c(0xD3A8, None, "HANGUL SYLLABLE PEM", 0x31, "Hangul"),
    c(0xD3A9, None, "HANGUL SYLLABLE PEB", 0x31, "Hangul"),
    c(0xD3AA, None, "HANGUL SYLLABLE PEBS", 0x31, "Hangul"),
    c(0xD3AB, None, "HANGUL SYLLABLE PES", 0x31, "Hangul"),
    c(0xD3AC, None, "HANGUL SYLLABLE PESS", 0x31, "Hangul"),
    c(0xD3AD, None, "HANGUL SYLLABLE PENG", 0x31, "Hangul"),
    c(0xD3AE, None, "HANGUL SYLLABLE PEJ", 0x31, "Hangul"),
    c(0xD3AF, None, "HANGUL SYLLABLE PEC", 0x31, "Hangul"),
    c(0xD3B0, None, "HANGUL SYLLABLE PEK", 0x31, "Hangul"),
    c(0xD3B1, None, "HANGUL SYLLABLE PET", 0x31, "Hangul"),
    c(0xD3B2, None, "HANGUL SYLLABLE PEP", 0x31, "Hangul"),
    c(0xD3B3, None, "HANGUL SYLLABLE PEH", 0x31, "Hangul"),
    c(0xD3B4, None, "HANGUL SYLLABLE PYEO", 0x31, "Hangul"),
    c(0xD3B5, None, "HANGUL SYLLABLE PYEOG", 0x31, "Hangul"),
    c(0xD3B6, None, "HANGUL SYLLABLE PYEOGG", 0x31, "Hangul"),
    c(0xD3B7, None, "HANGUL SYLLABLE PYEOGS", 0x31, "Hangul"),
    c(0xD3B8, None, "HANGUL SYLLABLE PYEON", 0x31, "Hangul"),
    c(0xD3B9, None, "HANGUL SYLLABLE PYEONJ", 0x31, "Hangul"),
    c(0xD3BA, None, "HANGUL SYLLABLE PYEONH", 0x31, "Hangul"),
    c(0xD3BB, None, "HANGUL SYLLABLE PYEOD", 0x31, "Hangul"),
    c(0xD3BC, None, "HANGUL SYLLABLE PYEOL", 0x31, "Hangul"),
    c(0xD3BD, None, "HANGUL SYLLABLE PYEOLG", 0x31, "Hangul"),
    c(0xD3BE, None, "HANGUL SYLLABLE PYEOLM", 0x31, "Hangul"),
    c(0xD3BF, None, "HANGUL SYLLABLE PYEOLB", 0x31, "Hangul"),
    c(0xD3C0, None, "HANGUL SYLLABLE PYEOLS", 0x31, "Hangul"),
    c(0xD3C1, None, "HANGUL SYLLABLE PYEOLT", 0x31, "Hangul"),
    c(0xD3C2, None, "HANGUL SYLLABLE PYEOLP", 0x31, "Hangul"),
    c(0xD3C3, None, "HANGUL SYLLABLE PYEOLH", 0x31, "Hangul"),
    c(0xD3C4, None, "HANGUL SYLLABLE PYEOM", 0x31, "Hangul"),
    c(0xD3C5, None, "HANGUL SYLLABLE PYEOB", 0x31, "Hangul"),
    c(0xD3C6, None, "HANGUL SYLLABLE PYEOBS", 0x31, "Hangul"),
    c(0xD3C7, None, "HANGUL SYLLABLE PYEOS", 0x31, "Hangul"),
    c(0xD3C8, None, "HANGUL SYLLABLE PYEOSS", 0x31, "Hangul"),
    c(0xD3C9, None, "HANGUL SYLLABLE PYEONG", 0x31, "Hangul"),
    c(0xD3CA, None, "HANGUL SYLLABLE PYEOJ", 0x31, "Hangul"),
    c(0xD3CB, None, "HANGUL SYLLABLE PYEOC", 0x31, "Hangul"),
    c(0xD3CC, None, "HANGUL SYLLABLE PYEOK", 0x31, "Hangul"),
    c(0xD3CD, None, "HANGUL SYLLABLE PYEOT", 0x31, "Hangul"),
    c(0xD3CE, None, "HANGUL SYLLABLE PYEOP", 0x31, "Hangul"),
    c(0xD3CF, None, "HANGUL SYLLABLE PYEOH", 0x31, "Hangul"),
    c(0xD3D0, None, "HANGUL SYLLABLE PYE", 0x31, "Hangul"),
    c(0xD3D1, None, "HANGUL SYLLABLE PYEG", 0x31, "Hangul"),
    c(0xD3D2, None, "HANGUL SYLLABLE PYEGG", 0x31, "Hangul"),
    c(0xD3D3, None, "HANGUL SYLLABLE PYEGS", 0x31, "Hangul"),
    c(0xD3D4, None, "HANGUL SYLLABLE PYEN", 0x31, "Hangul"),
    c(0xD3D5, None, "HANGUL SYLLABLE PYENJ", 0x31, "Hangul"),
    c(0xD3D6, None, "HANGUL SYLLABLE PYENH", 0x31, "Hangul"),
    c(0xD3D7, None, "HANGUL SYLLABLE PYED", 0x31, "Hangul"),
    c(0xD3D8, None, "HANGUL SYLLABLE PYEL", 0x31, "Hangul"),
    c(0xD3D9, None, "HANGUL SYLLABLE PYELG", 0x31, "Hangul"),
    c(0xD3DA, None, "HANGUL SYLLABLE PYELM", 0x31, "Hangul"),
    c(0xD3DB, None, "HANGUL SYLLABLE PYELB", 0x31, "Hangul"),
    c(0xD3DC, None, "HANGUL SYLLABLE PYELS", 0x31, "Hangul"),
    c(0xD3DD, None, "HANGUL SYLLABLE PYELT", 0x31, "Hangul"),
    c(0xD3DE, None, "HANGUL SYLLABLE PYELP", 0x31, "Hangul"),
    c(0xD3DF, None, "HANGUL SYLLABLE PYELH", 0x31, "Hangul"),
    c(0xD3E0, None, "HANGUL SYLLABLE PYEM", 0x31, "Hangul"),
    c(0xD3E1, None, "HANGUL SYLLABLE PYEB", 0x31, "Hangul"),
    c(0xD3E2, None, "HANGUL SYLLABLE PYEBS", 0x31, "Hangul"),
    c(0xD3E3, None, "HANGUL SYLLABLE PYES", 0x31, "Hangul"),
    c(0xD3E4, None, "HANGUL SYLLABLE PYESS", 0x31, "Hangul"),
    c(0xD3E5, None, "HANGUL SYLLABLE PYENG", 0x31, "Hangul"),
    c(0xD3E6, None, "HANGUL SYLLABLE PYEJ", 0x31, "Hangul"),
    c(0xD3E7, None, "HANGUL SYLLABLE PYEC", 0x31, "Hangul"),
    c(0xD3E8, None, "HANGUL SYLLABLE PYEK", 0x31, "Hangul"),
    c(0xD3E9, None, "HANGUL SYLLABLE PYET", 0x31, "Hangul"),
    c(0xD3EA, None, "HANGUL SYLLABLE PYEP", 0x31, "Hangul"),
    c(0xD3EB, None, "HANGUL SYLLABLE PYEH", 0x31, "Hangul"),
    c(0xD3EC, None, "HANGUL SYLLABLE PO", 0x31, "Hangul"),
    c(0xD3ED, None, "HANGUL SYLLABLE POG", 0x31, "Hangul"),
    c(0xD3EE, None, "HANGUL SYLLABLE POGG", 0x31, "Hangul"),
    c(0xD3EF, None, "HANGUL SYLLABLE POGS", 0x31, "Hangul"),
    c(0xD3F0, None, "HANGUL SYLLABLE PON", 0x31, "Hangul"),
    c(0xD3F1, None, "HANGUL SYLLABLE PONJ", 0x31, "Hangul"),
    c(0xD3F2, None, "HANGUL SYLLABLE PONH", 0x31, "Hangul"),
    c(0xD3F3, None, "HANGUL SYLLABLE POD", 0x31, "Hangul"),
    c(0xD3F4, None, "HANGUL SYLLABLE POL", 0x31, "Hangul"),
    c(0xD3F5, None, "HANGUL SYLLABLE POLG", 0x31, "Hangul"),
    c(0xD3F6, None, "HANGUL SYLLABLE POLM", 0x31, "Hangul"),
    c(0xD3F7, None, "HANGUL SYLLABLE POLB", 0x31, "Hangul"),
    c(0xD3F8, None, "HANGUL SYLLABLE POLS", 0x31, "Hangul"),
    c(0xD3F9, None, "HANGUL SYLLABLE POLT", 0x31, "Hangul"),
    c(0xD3FA, None, "HANGUL SYLLABLE POLP", 0x31, "Hangul"),
    c(0xD3FB, None, "HANGUL SYLLABLE POLH", 0x31, "Hangul"),
    c(0xD3FC, None, "HANGUL SYLLABLE POM", 0x31, "Hangul"),
    c(0xD3FD, None, "HANGUL SYLLABLE POB", 0x31, "Hangul"),
    c(0xD3FE, None, "HANGUL SYLLABLE POBS", 0x31, "Hangul"),
    c(0xD3FF, None, "HANGUL SYLLABLE POS", 0x31, "Hangul"),
    c(0xD400, None, "HANGUL SYLLABLE POSS", 0x31, "Hangul"),
    c(0xD401, None, "HANGUL SYLLABLE PONG", 0x31, "Hangul"),
    c(0xD402, None, "HANGUL SYLLABLE POJ", 0x31, "Hangul"),
    c(0xD403, None, "HANGUL SYLLABLE POC", 0x31, "Hangul"),
    c(0xD404, None, "HANGUL SYLLABLE POK", 0x31, "Hangul"),
    c(0xD405, None, "HANGUL SYLLABLE POT", 0x31, "Hangul"),
    c(0xD406, None, "HANGUL SYLLABLE POP", 0x31, "Hangul"),
    c(0xD407, None, "HANGUL SYLLABLE POH", 0x31, "Hangul"),
    c(0xD408, None, "HANGUL SYLLABLE PWA", 0x31, "Hangul"),
    c(0xD409, None, "HANGUL SYLLABLE PWAG", 0x31, "Hangul"),
    c(0xD40A, None, "HANGUL SYLLABLE PWAGG", 0x31, "Hangul"),
    c(0xD40B, None, "HANGUL SYLLABLE PWAGS", 0x31, "Hangul"),
    c(0xD40C, None, "HANGUL SYLLABLE PWAN", 0x31, "Hangul"),
    c(0xD40D, None, "HANGUL SYLLABLE PWANJ", 0x31, "Hangul"),
    c(0xD40E, None, "HANGUL SYLLABLE PWANH", 0x31, "Hangul"),
    c(0xD40F, None, "HANGUL SYLLABLE PWAD", 0x31, "Hangul"),
    c(0xD410, None, "HANGUL SYLLABLE PWAL", 0x31, "Hangul"),
    c(0xD411, None, "HANGUL SYLLABLE PWALG", 0x31, "Hangul"),
    c(0xD412, None, "HANGUL SYLLABLE PWALM", 0x31, "Hangul"),
    c(0xD413, None, "HANGUL SYLLABLE PWALB", 0x31, "Hangul"),
    c(0xD414, None, "HANGUL SYLLABLE PWALS", 0x31, "Hangul"),
    c(0xD415, None, "HANGUL SYLLABLE PWALT", 0x31, "Hangul"),
    c(0xD416, None, "HANGUL SYLLABLE PWALP", 0x31, "Hangul"),
    c(0xD417, None, "HANGUL SYLLABLE PWALH", 0x31, "Hangul"),
    c(0xD418, None, "HANGUL SYLLABLE PWAM", 0x31, "Hangul"),
    c(0xD419, None, "HANGUL SYLLABLE PWAB", 0x31, "Hangul"),
    c(0xD41A, None, "HANGUL SYLLABLE PWABS", 0x31, "Hangul"),
    c(0xD41B, None, "HANGUL SYLLABLE PWAS", 0x31, "Hangul"),
    c(0xD41C, None, "HANGUL SYLLABLE PWASS", 0x31, "Hangul"),
    c(0xD41D, None, "HANGUL SYLLABLE PWANG", 0x31, "Hangul"),
    c(0xD41E, None, "HANGUL SYLLABLE PWAJ", 0x31, "Hangul"),
    c(0xD41F, None, "HANGUL SYLLABLE PWAC", 0x31, "Hangul"),
    c(0xD420, None, "HANGUL SYLLABLE PWAK", 0x31, "Hangul"),
    c(0xD421, None, "HANGUL SYLLABLE PWAT", 0x31, "Hangul"),
    c(0xD422, None, "HANGUL SYLLABLE PWAP", 0x31, "Hangul"),
    c(0xD423, None, "HANGUL SYLLABLE PWAH", 0x31, "Hangul"),
    c(0xD424, None, "HANGUL SYLLABLE PWAE", 0x31, "Hangul"),
    c(0xD425, None, "HANGUL SYLLABLE PWAEG", 0x31, "Hangul"),
    c(0xD426, None, "HANGUL SYLLABLE PWAEGG", 0x31, "Hangul"),
    c(0xD427, None, "HANGUL SYLLABLE PWAEGS", 0x31, "Hangul"),
    c(0xD428, None, "HANGUL SYLLABLE PWAEN", 0x31, "Hangul"),
    c(0xD429, None, "HANGUL SYLLABLE PWAENJ", 0x31, "Hangul"),
    c(0xD42A, None, "HANGUL SYLLABLE PWAENH", 0x31, "Hangul"),
    c(0xD42B, None, "HANGUL SYLLABLE PWAED", 0x31, "Hangul"),
    c(0xD42C, None, "HANGUL SYLLABLE PWAEL", 0x31, "Hangul"),
    c(0xD42D, None, "HANGUL SYLLABLE PWAELG", 0x31, "Hangul"),
    c(0xD42E, None, "HANGUL SYLLABLE PWAELM", 0x31, "Hangul"),
    c(0xD42F, None, "HANGUL SYLLABLE PWAELB", 0x31, "Hangul"),
    c(0xD430, None, "HANGUL SYLLABLE PWAELS", 0x31, "Hangul"),
    c(0xD431, None, "HANGUL SYLLABLE PWAELT", 0x31, "Hangul"),
    c(0xD432, None, "HANGUL SYLLABLE PWAELP", 0x31, "Hangul"),
    c(0xD433, None, "HANGUL SYLLABLE PWAELH", 0x31, "Hangul"),
    c(0xD434, None, "HANGUL SYLLABLE PWAEM", 0x31, "Hangul"),
    c(0xD435, None, "HANGUL SYLLABLE PWAEB", 0x31, "Hangul"),
    c(0xD436, None, "HANGUL SYLLABLE PWAEBS", 0x31, "Hangul"),
    c(0xD437, None, "HANGUL SYLLABLE PWAES", 0x31, "Hangul"),
    c(0xD438, None, "HANGUL SYLLABLE PWAESS", 0x31, "Hangul"),
    c(0xD439, None, "HANGUL SYLLABLE PWAENG", 0x31, "Hangul"),
    c(0xD43A, None, "HANGUL SYLLABLE PWAEJ", 0x31, "Hangul"),
    c(0xD43B, None, "HANGUL SYLLABLE PWAEC", 0x31, "Hangul"),
    c(0xD43C, None, "HANGUL SYLLABLE PWAEK", 0x31, "Hangul"),
    c(0xD43D, None, "HANGUL SYLLABLE PWAET", 0x31, "Hangul"),
    c(0xD43E, None, "HANGUL SYLLABLE PWAEP", 0x31, "Hangul"),
    c(0xD43F, None, "HANGUL SYLLABLE PWAEH", 0x31, "Hangul"),
    c(0xD440, None, "HANGUL SYLLABLE POE", 0x31, "Hangul"),
    c(0xD441, None, "HANGUL SYLLABLE POEG", 0x31, "Hangul"),
    c(0xD442, None, "HANGUL SYLLABLE POEGG", 0x31, "Hangul"),
    c(0xD443, None, "HANGUL SYLLABLE POEGS", 0x31, "Hangul"),
    c(0xD444, None, "HANGUL SYLLABLE POEN", 0x31, "Hangul"),
    c(0xD445, None, "HANGUL SYLLABLE POENJ", 0x31, "Hangul"),
    c(0xD446, None, "HANGUL SYLLABLE POENH", 0x31, "Hangul"),
    c(0xD447, None, "HANGUL SYLLABLE POED", 0x31, "Hangul"),
    c(0xD448, None, "HANGUL SYLLABLE POEL", 0x31, "Hangul"),
    c(0xD449, None, "HANGUL SYLLABLE POELG", 0x31, "Hangul"),
    c(0xD44A, None, "HANGUL SYLLABLE POELM", 0x31, "Hangul"),
    c(0xD44B, None, "HANGUL SYLLABLE POELB", 0x31, "Hangul"),
    c(0xD44C, None, "HANGUL SYLLABLE POELS", 0x31, "Hangul"),
    c(0xD44D, None, "HANGUL SYLLABLE POELT", 0x31, "Hangul"),
    c(0xD44E, None, "HANGUL SYLLABLE POELP", 0x31, "Hangul"),
    c(0xD44F, None, "HANGUL SYLLABLE POELH", 0x31, "Hangul"),
    c(0xD450, None, "HANGUL SYLLABLE POEM", 0x31, "Hangul"),
    c(0xD451, None, "HANGUL SYLLABLE POEB", 0x31, "Hangul"),
    c(0xD452, None, "HANGUL SYLLABLE POEBS", 0x31, "Hangul"),
    c(0xD453, None, "HANGUL SYLLABLE POES", 0x31, "Hangul"),
    c(0xD454, None, "HANGUL SYLLABLE POESS", 0x31, "Hangul"),
    c(0xD455, None, "HANGUL SYLLABLE POENG", 0x31, "Hangul"),
    c(0xD456, None, "HANGUL SYLLABLE POEJ", 0x31, "Hangul"),
    c(0xD457, None, "HANGUL SYLLABLE POEC", 0x31, "Hangul"),
    c(0xD458, None, "HANGUL SYLLABLE POEK", 0x31, "Hangul"),
    c(0xD459, None, "HANGUL SYLLABLE POET", 0x31, "Hangul"),
    c(0xD45A, None, "HANGUL SYLLABLE POEP", 0x31, "Hangul"),
    c(0xD45B, None, "HANGUL SYLLABLE POEH", 0x31, "Hangul"),
    c(0xD45C, None, "HANGUL SYLLABLE PYO", 0x31, "Hangul"),
    c(0xD45D, None, "HANGUL SYLLABLE PYOG", 0x31, "Hangul"),
    c(0xD45E, None, "HANGUL SYLLABLE PYOGG", 0x31, "Hangul"),
    c(0xD45F, None, "HANGUL SYLLABLE PYOGS", 0x31, "Hangul"),
    c(0xD460, None, "HANGUL SYLLABLE PYON", 0x31, "Hangul"),
    c(0xD461, None, "HANGUL SYLLABLE PYONJ", 0x31, "Hangul"),
    c(0xD462, None, "HANGUL SYLLABLE PYONH", 0x31, "Hangul"),
    c(0xD463, None, "HANGUL SYLLABLE PYOD", 0x31, "Hangul"),
    c(0xD464, None, "HANGUL SYLLABLE PYOL", 0x31, "Hangul"),
    c(0xD465, None, "HANGUL SYLLABLE PYOLG", 0x31, "Hangul"),
    c(0xD466, None, "HANGUL SYLLABLE PYOLM", 0x31, "Hangul"),
    c(0xD467, None, "HANGUL SYLLABLE PYOLB", 0x31, "Hangul"),
    c(0xD468, None, "HANGUL SYLLABLE PYOLS", 0x31, "Hangul"),
    c(0xD469, None, "HANGUL SYLLABLE PYOLT", 0x31, "Hangul"),
    c(0xD46A, None, "HANGUL SYLLABLE PYOLP", 0x31, "Hangul"),
    c(0xD46B, None, "HANGUL SYLLABLE PYOLH", 0x31, "Hangul"),
    c(0xD46C, None, "HANGUL SYLLABLE PYOM", 0x31, "Hangul"),
    c(0xD46D, None, "HANGUL SYLLABLE PYOB", 0x31, "Hangul"),
    c(0xD46E, None, "HANGUL SYLLABLE PYOBS", 0x31, "Hangul"),
    c(0xD46F, None, "HANGUL SYLLABLE PYOS", 0x31, "Hangul"),
    c(0xD470, None, "HANGUL SYLLABLE PYOSS", 0x31, "Hangul"),
    c(0xD471, None, "HANGUL SYLLABLE PYONG", 0x31, "Hangul"),
    c(0xD472, None, "HANGUL SYLLABLE PYOJ", 0x31, "Hangul"),
    c(0xD473, None, "HANGUL SYLLABLE PYOC", 0x31, "Hangul"),
    c(0xD474, None, "HANGUL SYLLABLE PYOK", 0x31, "Hangul"),
    c(0xD475, None, "HANGUL SYLLABLE PYOT", 0x31, "Hangul"),
    c(0xD476, None, "HANGUL SYLLABLE PYOP", 0x31, "Hangul"),
    c(0xD477, None, "HANGUL SYLLABLE PYOH", 0x31, "Hangul"),
    c(0xD478, None, "HANGUL SYLLABLE PU", 0x31, "Hangul"),
    c(0xD479, None, "HANGUL SYLLABLE PUG", 0x31, "Hangul"),
    c(0xD47A, None, "HANGUL SYLLABLE PUGG", 0x31, "Hangul"),
    c(0xD47B, None, "HANGUL SYLLABLE PUGS", 0x31, "Hangul"),
    c(0xD47C, None, "HANGUL SYLLABLE PUN", 0x31, "Hangul"),
    c(0xD47D, None, "HANGUL SYLLABLE PUNJ", 0x31, "Hangul"),
    c(0xD47E, None, "HANGUL SYLLABLE PUNH", 0x31, "Hangul"),
    c(0xD47F, None, "HANGUL SYLLABLE PUD", 0x31, "Hangul"),
    c(0xD480, None, "HANGUL SYLLABLE PUL", 0x31, "Hangul"),
    c(0xD481, None, "HANGUL SYLLABLE PULG", 0x31, "Hangul"),
    c(0xD482, None, "HANGUL SYLLABLE PULM", 0x31, "Hangul"),
    c(0xD483, None, "HANGUL SYLLABLE PULB", 0x31, "Hangul"),
    c(0xD484, None, "HANGUL SYLLABLE PULS", 0x31, "Hangul"),
    c(0xD485, None, "HANGUL SYLLABLE PULT", 0x31, "Hangul"),
    c(0xD486, None, "HANGUL SYLLABLE PULP", 0x31, "Hangul"),
    c(0xD487, None, "HANGUL SYLLABLE PULH", 0x31, "Hangul"),
    c(0xD488, None, "HANGUL SYLLABLE PUM", 0x31, "Hangul"),
    c(0xD489, None, "HANGUL SYLLABLE PUB", 0x31, "Hangul"),
    c(0xD48A, None, "HANGUL SYLLABLE PUBS", 0x31, "Hangul"),
    c(0xD48B, None, "HANGUL SYLLABLE PUS", 0x31, "Hangul"),
    c(0xD48C, None, "HANGUL SYLLABLE PUSS", 0x31, "Hangul"),
    c(0xD48D, None, "HANGUL SYLLABLE PUNG", 0x31, "Hangul"),
    c(0xD48E, None, "HANGUL SYLLABLE PUJ", 0x31, "Hangul"),
    c(0xD48F, None, "HANGUL SYLLABLE PUC", 0x31, "Hangul"),
    c(0xD490, None, "HANGUL SYLLABLE PUK", 0x31, "Hangul"),
    c(0xD491, None, "HANGUL SYLLABLE PUT", 0x31, "Hangul"),
    c(0xD492, None, "HANGUL SYLLABLE PUP", 0x31, "Hangul"),
    c(0xD493, None, "HANGUL SYLLABLE PUH", 0x31, "Hangul"),
    c(0xD494, None, "HANGUL SYLLABLE PWEO", 0x31, "Hangul"),
    c(0xD495, None, "HANGUL SYLLABLE PWEOG", 0x31, "Hangul"),
    c(0xD496, None, "HANGUL SYLLABLE PWEOGG", 0x31, "Hangul"),
    c(0xD497, None, "HANGUL SYLLABLE PWEOGS", 0x31, "Hangul"),
    c(0xD498, None, "HANGUL SYLLABLE PWEON", 0x31, "Hangul"),
    c(0xD499, None, "HANGUL SYLLABLE PWEONJ", 0x31, "Hangul"),
    c(0xD49A, None, "HANGUL SYLLABLE PWEONH", 0x31, "Hangul"),
    c(0xD49B, None, "HANGUL SYLLABLE PWEOD", 0x31, "Hangul"),
    c(0xD49C, None, "HANGUL SYLLABLE PWEOL", 0x31, "Hangul"),
    c(0xD49D, None, "HANGUL SYLLABLE PWEOLG", 0x31, "Hangul"),
    c(0xD49E, None, "HANGUL SYLLABLE PWEOLM", 0x31, "Hangul"),
    c(0xD49F, None, "HANGUL SYLLABLE PWEOLB", 0x31, "Hangul"),
    c(0xD4A0, None, "HANGUL SYLLABLE PWEOLS", 0x31, "Hangul"),
    c(0xD4A1, None, "HANGUL SYLLABLE PWEOLT", 0x31, "Hangul"),
    c(0xD4A2, None, "HANGUL SYLLABLE PWEOLP", 0x31, "Hangul"),
    c(0xD4A3, None, "HANGUL SYLLABLE PWEOLH", 0x31, "Hangul"),
    c(0xD4A4, None, "HANGUL SYLLABLE PWEOM", 0x31, "Hangul"),
    c(0xD4A5, None, "HANGUL SYLLABLE PWEOB", 0x31, "Hangul"),
    c(0xD4A6, None, "HANGUL SYLLABLE PWEOBS", 0x31, "Hangul"),
    c(0xD4A7, None, "HANGUL SYLLABLE PWEOS", 0x31, "Hangul"),
    c(0xD4A8, None, "HANGUL SYLLABLE PWEOSS", 0x31, "Hangul"),
    c(0xD4A9, None, "HANGUL SYLLABLE PWEONG", 0x31, "Hangul"),
    c(0xD4AA, None, "HANGUL SYLLABLE PWEOJ", 0x31, "Hangul"),
    c(0xD4AB, None, "HANGUL SYLLABLE PWEOC", 0x31, "Hangul"),
    c(0xD4AC, None, "HANGUL SYLLABLE PWEOK", 0x31, "Hangul"),
    c(0xD4AD, None, "HANGUL SYLLABLE PWEOT", 0x31, "Hangul"),
    c(0xD4AE, None, "HANGUL SYLLABLE PWEOP", 0x31, "Hangul"),
    c(0xD4AF, None, "HANGUL SYLLABLE PWEOH", 0x31, "Hangul"),
    c(0xD4B0, None, "HANGUL SYLLABLE PWE", 0x31, "Hangul"),
    c(0xD4B1, None, "HANGUL SYLLABLE PWEG", 0x31, "Hangul"),
    c(0xD4B2, None, "HANGUL SYLLABLE PWEGG", 0x31, "Hangul"),
    c(0xD4B3, None, "HANGUL SYLLABLE PWEGS", 0x31, "Hangul"),
    c(0xD4B4, None, "HANGUL SYLLABLE PWEN", 0x31, "Hangul"),
    c(0xD4B5, None, "HANGUL SYLLABLE PWENJ", 0x31, "Hangul"),
    c(0xD4B6, None, "HANGUL SYLLABLE PWENH", 0x31, "Hangul"),
    c(0xD4B7, None, "HANGUL SYLLABLE PWED", 0x31, "Hangul"),
    c(0xD4B8, None, "HANGUL SYLLABLE PWEL", 0x31, "Hangul"),
    c(0xD4B9, None, "HANGUL SYLLABLE PWELG", 0x31, "Hangul"),
    c(0xD4BA, None, "HANGUL SYLLABLE PWELM", 0x31, "Hangul"),
    c(0xD4BB, None, "HANGUL SYLLABLE PWELB", 0x31, "Hangul"),
    c(0xD4BC, None, "HANGUL SYLLABLE PWELS", 0x31, "Hangul"),
    c(0xD4BD, None, "HANGUL SYLLABLE PWELT", 0x31, "Hangul"),
    c(0xD4BE, None, "HANGUL SYLLABLE PWELP", 0x31, "Hangul"),
    c(0xD4BF, None, "HANGUL SYLLABLE PWELH", 0x31, "Hangul"),
    c(0xD4C0, None, "HANGUL SYLLABLE PWEM", 0x31, "Hangul"),
    c(0xD4C1, None, "HANGUL SYLLABLE PWEB", 0x31, "Hangul"),
    c(0xD4C2, None, "HANGUL SYLLABLE PWEBS", 0x31, "Hangul"),
    c(0xD4C3, None, "HANGUL SYLLABLE PWES", 0x31, "Hangul"),
    c(0xD4C4, None, "HANGUL SYLLABLE PWESS", 0x31, "Hangul"),
    c(0xD4C5, None, "HANGUL SYLLABLE PWENG", 0x31, "Hangul"),
    c(0xD4C6, None, "HANGUL SYLLABLE PWEJ", 0x31, "Hangul"),
    c(0xD4C7, None, "HANGUL SYLLABLE PWEC", 0x31, "Hangul"),
    c(0xD4C8, None, "HANGUL SYLLABLE PWEK", 0x31, "Hangul"),
    c(0xD4C9, None, "HANGUL SYLLABLE PWET", 0x31, "Hangul"),
    c(0xD4CA, None, "HANGUL SYLLABLE PWEP", 0x31, "Hangul"),
    c(0xD4CB, None, "HANGUL SYLLABLE PWEH", 0x31, "Hangul"),
    c(0xD4CC, None, "HANGUL SYLLABLE PWI", 0x31, "Hangul"),
    c(0xD4CD, None, "HANGUL SYLLABLE PWIG", 0x31, "Hangul"),
    c(0xD4CE, None, "HANGUL SYLLABLE PWIGG", 0x31, "Hangul"),
    c(0xD4CF, None, "HANGUL SYLLABLE PWIGS", 0x31, "Hangul"),
    c(0xD4D0, None, "HANGUL SYLLABLE PWIN", 0x31, "Hangul"),
    c(0xD4D1, None, "HANGUL SYLLABLE PWINJ", 0x31, "Hangul"),
    c(0xD4D2, None, "HANGUL SYLLABLE PWINH", 0x31, "Hangul"),
    c(0xD4D3, None, "HANGUL SYLLABLE PWID", 0x31, "Hangul"),
    c(0xD4D4, None, "HANGUL SYLLABLE PWIL", 0x31, "Hangul"),
    c(0xD4D5, None, "HANGUL SYLLABLE PWILG", 0x31, "Hangul"),
    c(0xD4D6, None, "HANGUL SYLLABLE PWILM", 0x31, "Hangul"),
    c(0xD4D7, None, "HANGUL SYLLABLE PWILB", 0x31, "Hangul"),
    c(0xD4D8, None, "HANGUL SYLLABLE PWILS", 0x31, "Hangul"),
    c(0xD4D9, None, "HANGUL SYLLABLE PWILT", 0x31, "Hangul"),
    c(0xD4DA, None, "HANGUL SYLLABLE PWILP", 0x31, "Hangul"),
    c(0xD4DB, None, "HANGUL SYLLABLE PWILH", 0x31, "Hangul"),
    c(0xD4DC, None, "HANGUL SYLLABLE PWIM", 0x31, "Hangul"),
    c(0xD4DD, None, "HANGUL SYLLABLE PWIB", 0x31, "Hangul"),
    c(0xD4DE, None, "HANGUL SYLLABLE PWIBS", 0x31, "Hangul"),
    c(0xD4DF, None, "HANGUL SYLLABLE PWIS", 0x31, "Hangul"),
    c(0xD4E0, None, "HANGUL SYLLABLE PWISS", 0x31, "Hangul"),
    c(0xD4E1, None, "HANGUL SYLLABLE PWING", 0x31, "Hangul"),
    c(0xD4E2, None, "HANGUL SYLLABLE PWIJ", 0x31, "Hangul"),
    c(0xD4E3, None, "HANGUL SYLLABLE PWIC", 0x31, "Hangul"),
    c(0xD4E4, None, "HANGUL SYLLABLE PWIK", 0x31, "Hangul"),
    c(0xD4E5, None, "HANGUL SYLLABLE PWIT", 0x31, "Hangul"),
    c(0xD4E6, None, "HANGUL SYLLABLE PWIP", 0x31, "Hangul"),
    c(0xD4E7, None, "HANGUL SYLLABLE PWIH", 0x31, "Hangul"),
    c(0xD4E8, None, "HANGUL SYLLABLE PYU", 0x31, "Hangul"),
    c(0xD4E9, None, "HANGUL SYLLABLE PYUG", 0x31, "Hangul"),
    c(0xD4EA, None, "HANGUL SYLLABLE PYUGG", 0x31, "Hangul"),
    c(0xD4EB, None, "HANGUL SYLLABLE PYUGS", 0x31, "Hangul"),
    c(0xD4EC, None, "HANGUL SYLLABLE PYUN", 0x31, "Hangul"),
    c(0xD4ED, None, "HANGUL SYLLABLE PYUNJ", 0x31, "Hangul"),
    c(0xD4EE, None, "HANGUL SYLLABLE PYUNH", 0x31, "Hangul"),
    c(0xD4EF, None, "HANGUL SYLLABLE PYUD", 0x31, "Hangul"),
    c(0xD4F0, None, "HANGUL SYLLABLE PYUL", 0x31, "Hangul"),
    c(0xD4F1, None, "HANGUL SYLLABLE PYULG", 0x31, "Hangul"),
    c(0xD4F2, None, "HANGUL SYLLABLE PYULM", 0x31, "Hangul"),
    c(0xD4F3, None, "HANGUL SYLLABLE PYULB", 0x31, "Hangul"),
    c(0xD4F4, None, "HANGUL SYLLABLE PYULS", 0x31, "Hangul"),
    c(0xD4F5, None, "HANGUL SYLLABLE PYULT", 0x31, "Hangul"),
    c(0xD4F6, None, "HANGUL SYLLABLE PYULP", 0x31, "Hangul"),
    c(0xD4F7, None, "HANGUL SYLLABLE PYULH", 0x31, "Hangul"),
    c(0xD4F8, None, "HANGUL SYLLABLE PYUM", 0x31, "Hangul"),
    c(0xD4F9, None, "HANGUL SYLLABLE PYUB", 0x31, "Hangul"),
    c(0xD4FA, None, "HANGUL SYLLABLE PYUBS", 0x31, "Hangul"),
    c(0xD4FB, None, "HANGUL SYLLABLE PYUS", 0x31, "Hangul"),
    c(0xD4FC, None, "HANGUL SYLLABLE PYUSS", 0x31, "Hangul"),
    c(0xD4FD, None, "HANGUL SYLLABLE PYUNG", 0x31, "Hangul"),
    c(0xD4FE, None, "HANGUL SYLLABLE PYUJ", 0x31, "Hangul"),
    c(0xD4FF, None, "HANGUL SYLLABLE PYUC", 0x31, "Hangul"),
    c(0xD500, None, "HANGUL SYLLABLE PYUK", 0x31, "Hangul"),
    c(0xD501, None, "HANGUL SYLLABLE PYUT", 0x31, "Hangul"),
    c(0xD502, None, "HANGUL SYLLABLE PYUP", 0x31, "Hangul"),
    c(0xD503, None, "HANGUL SYLLABLE PYUH", 0x31, "Hangul"),
    c(0xD504, None, "HANGUL SYLLABLE PEU", 0x31, "Hangul"),
    c(0xD505, None, "HANGUL SYLLABLE PEUG", 0x31, "Hangul"),
    c(0xD506, None, "HANGUL SYLLABLE PEUGG", 0x31, "Hangul"),
    c(0xD507, None, "HANGUL SYLLABLE PEUGS", 0x31, "Hangul"),
    c(0xD508, None, "HANGUL SYLLABLE PEUN", 0x31, "Hangul"),
    c(0xD509, None, "HANGUL SYLLABLE PEUNJ", 0x31, "Hangul"),
    c(0xD50A, None, "HANGUL SYLLABLE PEUNH", 0x31, "Hangul"),
    c(0xD50B, None, "HANGUL SYLLABLE PEUD", 0x31, "Hangul"),
    c(0xD50C, None, "HANGUL SYLLABLE PEUL", 0x31, "Hangul"),
    c(0xD50D, None, "HANGUL SYLLABLE PEULG", 0x31, "Hangul"),
    c(0xD50E, None, "HANGUL SYLLABLE PEULM", 0x31, "Hangul"),
    c(0xD50F, None, "HANGUL SYLLABLE PEULB", 0x31, "Hangul"),
    c(0xD510, None, "HANGUL SYLLABLE PEULS", 0x31, "Hangul"),
    c(0xD511, None, "HANGUL SYLLABLE PEULT", 0x31, "Hangul"),
    c(0xD512, None, "HANGUL SYLLABLE PEULP", 0x31, "Hangul"),
    c(0xD513, None, "HANGUL SYLLABLE PEULH", 0x31, "Hangul"),
    c(0xD514, None, "HANGUL SYLLABLE PEUM", 0x31, "Hangul"),
    c(0xD515, None, "HANGUL SYLLABLE PEUB", 0x31, "Hangul"),
    c(0xD516, None, "HANGUL SYLLABLE PEUBS", 0x31, "Hangul"),
    c(0xD517, None, "HANGUL SYLLABLE PEUS", 0x31, "Hangul"),
    c(0xD518, None, "HANGUL SYLLABLE PEUSS", 0x31, "Hangul"),
    c(0xD519, None, "HANGUL SYLLABLE PEUNG", 0x31, "Hangul"),
    c(0xD51A, None, "HANGUL SYLLABLE PEUJ", 0x31, "Hangul"),
    c(0xD51B, None, "HANGUL SYLLABLE PEUC", 0x31, "Hangul"),
    c(0xD51C, None, "HANGUL SYLLABLE PEUK", 0x31, "Hangul"),
    c(0xD51D, None, "HANGUL SYLLABLE PEUT", 0x31, "Hangul"),
    c(0xD51E, None, "HANGUL SYLLABLE PEUP", 0x31, "Hangul"),
    c(0xD51F, None, "HANGUL SYLLABLE PEUH", 0x31, "Hangul"),
    c(0xD520, None, "HANGUL SYLLABLE PYI", 0x31, "Hangul"),
    c(0xD521, None, "HANGUL SYLLABLE PYIG", 0x31, "Hangul"),
    c(0xD522, None, "HANGUL SYLLABLE PYIGG", 0x31, "Hangul"),
    c(0xD523, None, "HANGUL SYLLABLE PYIGS", 0x31, "Hangul"),
    c(0xD524, None, "HANGUL SYLLABLE PYIN", 0x31, "Hangul"),
    c(0xD525, None, "HANGUL SYLLABLE PYINJ", 0x31, "Hangul"),
    c(0xD526, None, "HANGUL SYLLABLE PYINH", 0x31, "Hangul"),
    c(0xD527, None, "HANGUL SYLLABLE PYID", 0x31, "Hangul"),
    c(0xD528, None, "HANGUL SYLLABLE PYIL", 0x31, "Hangul"),
    c(0xD529, None, "HANGUL SYLLABLE PYILG", 0x31, "Hangul"),
    c(0xD52A, None, "HANGUL SYLLABLE PYILM", 0x31, "Hangul"),
    c(0xD52B, None, "HANGUL SYLLABLE PYILB", 0x31, "Hangul"),
    c(0xD52C, None, "HANGUL SYLLABLE PYILS", 0x31, "Hangul"),
    c(0xD52D, None, "HANGUL SYLLABLE PYILT", 0x31, "Hangul"),
    c(0xD52E, None, "HANGUL SYLLABLE PYILP", 0x31, "Hangul"),
    c(0xD52F, None, "HANGUL SYLLABLE PYILH", 0x31, "Hangul"),
    c(0xD530, None, "HANGUL SYLLABLE PYIM", 0x31, "Hangul"),
    c(0xD531, None, "HANGUL SYLLABLE PYIB", 0x31, "Hangul"),
    c(0xD532, None, "HANGUL SYLLABLE PYIBS", 0x31, "Hangul"),
    c(0xD533, None, "HANGUL SYLLABLE PYIS", 0x31, "Hangul"),
    c(0xD534, None, "HANGUL SYLLABLE PYISS", 0x31, "Hangul"),
    c(0xD535, None, "HANGUL SYLLABLE PYING", 0x31, "Hangul"),
    c(0xD536, None, "HANGUL SYLLABLE PYIJ", 0x31, "Hangul"),
    c(0xD537, None, "HANGUL SYLLABLE PYIC", 0x31, "Hangul"),
    c(0xD538, None, "HANGUL SYLLABLE PYIK", 0x31, "Hangul"),
    c(0xD539, None, "HANGUL SYLLABLE PYIT", 0x31, "Hangul"),
    c(0xD53A, None, "HANGUL SYLLABLE PYIP", 0x31, "Hangul"),
    c(0xD53B, None, "HANGUL SYLLABLE PYIH", 0x31, "Hangul"),
    c(0xD53C, None, "HANGUL SYLLABLE PI", 0x31, "Hangul"),
    c(0xD53D, None, "HANGUL SYLLABLE PIG", 0x31, "Hangul"),
    c(0xD53E, None, "HANGUL SYLLABLE PIGG", 0x31, "Hangul"),
    c(0xD53F, None, "HANGUL SYLLABLE PIGS", 0x31, "Hangul"),
    c(0xD540, None, "HANGUL SYLLABLE PIN", 0x31, "Hangul"),
    c(0xD541, None, "HANGUL SYLLABLE PINJ", 0x31, "Hangul"),
    c(0xD542, None, "HANGUL SYLLABLE PINH", 0x31, "Hangul"),
    c(0xD543, None, "HANGUL SYLLABLE PID", 0x31, "Hangul"),
    c(0xD544, None, "HANGUL SYLLABLE PIL", 0x31, "Hangul"),
    c(0xD545, None, "HANGUL SYLLABLE PILG", 0x31, "Hangul"),
    c(0xD546, None, "HANGUL SYLLABLE PILM", 0x31, "Hangul"),
    c(0xD547, None, "HANGUL SYLLABLE PILB", 0x31, "Hangul"),
    c(0xD548, None, "HANGUL SYLLABLE PILS", 0x31, "Hangul"),
    c(0xD549, None, "HANGUL SYLLABLE PILT", 0x31, "Hangul"),
    c(0xD54A, None, "HANGUL SYLLABLE PILP", 0x31, "Hangul"),
    c(0xD54B, None, "HANGUL SYLLABLE PILH", 0x31, "Hangul"),
    c(0xD54C, None, "HANGUL SYLLABLE PIM", 0x31, "Hangul"),
    c(0xD54D, None, "HANGUL SYLLABLE PIB", 0x31, "Hangul"),
    c(0xD54E, None, "HANGUL SYLLABLE PIBS", 0x31, "Hangul"),
    c(0xD54F, None, "HANGUL SYLLABLE PIS", 0x31, "Hangul"),
    c(0xD550, None, "HANGUL SYLLABLE PISS", 0x31, "Hangul"),
    c(0xD551, None, "HANGUL SYLLABLE PING", 0x31, "Hangul"),
    c(0xD552, None, "HANGUL SYLLABLE PIJ", 0x31, "Hangul"),
    c(0xD553, None, "HANGUL SYLLABLE PIC", 0x31, "Hangul"),
    c(0xD554, None, "HANGUL SYLLABLE PIK", 0x31, "Hangul"),
    c(0xD555, None, "HANGUL SYLLABLE PIT", 0x31, "Hangul"),
    c(0xD556, None, "HANGUL SYLLABLE PIP", 0x31, "Hangul"),
    c(0xD557, None, "HANGUL SYLLABLE PIH", 0x31, "Hangul"),
    c(0xD558, None, "HANGUL SYLLABLE HA", 0x31, "Hangul"),
    c(0xD559, None, "HANGUL SYLLABLE HAG", 0x31, "Hangul"),
    c(0xD55A, None, "HANGUL SYLLABLE HAGG", 0x31, "Hangul"),
    c(0xD55B, None, "HANGUL SYLLABLE HAGS", 0x31, "Hangul"),
    c(0xD55C, None, "HANGUL SYLLABLE HAN", 0x31, "Hangul"),
    c(0xD55D, None, "HANGUL SYLLABLE HANJ", 0x31, "Hangul"),
    c(0xD55E, None, "HANGUL SYLLABLE HANH", 0x31, "Hangul"),
    c(0xD55F, None, "HANGUL SYLLABLE HAD", 0x31, "Hangul"),
    c(0xD560, None, "HANGUL SYLLABLE HAL", 0x31, "Hangul"),
    c(0xD561, None, "HANGUL SYLLABLE HALG", 0x31, "Hangul"),
    c(0xD562, None, "HANGUL SYLLABLE HALM", 0x31, "Hangul"),
    c(0xD563, None, "HANGUL SYLLABLE HALB", 0x31, "Hangul"),
    c(0xD564, None, "HANGUL SYLLABLE HALS", 0x31, "Hangul"),
    c(0xD565, None, "HANGUL SYLLABLE HALT", 0x31, "Hangul"),
    c(0xD566, None, "HANGUL SYLLABLE HALP", 0x31, "Hangul"),
    c(0xD567, None, "HANGUL SYLLABLE HALH", 0x31, "Hangul"),
    c(0xD568, None, "HANGUL SYLLABLE HAM", 0x31, "Hangul"),
    c(0xD569, None, "HANGUL SYLLABLE HAB", 0x31, "Hangul"),
    c(0xD56A, None, "HANGUL SYLLABLE HABS", 0x31, "Hangul"),
    c(0xD56B, None, "HANGUL SYLLABLE HAS", 0x31, "Hangul"),
    c(0xD56C, None, "HANGUL SYLLABLE HASS", 0x31, "Hangul"),
    c(0xD56D, None, "HANGUL SYLLABLE HANG", 0x31, "Hangul"),
    c(0xD56E, None, "HANGUL SYLLABLE HAJ", 0x31, "Hangul"),
    c(0xD56F, None, "HANGUL SYLLABLE HAC", 0x31, "Hangul"),
    c(0xD570, None, "HANGUL SYLLABLE HAK", 0x31, "Hangul"),
    c(0xD571, None, "HANGUL SYLLABLE HAT", 0x31, "Hangul"),
    c(0xD572, None, "HANGUL SYLLABLE HAP", 0x31, "Hangul"),
    c(0xD573, None, "HANGUL SYLLABLE HAH", 0x31, "Hangul"),
    c(0xD574, None, "HANGUL SYLLABLE HAE", 0x31, "Hangul"),
    c(0xD575, None, "HANGUL SYLLABLE HAEG", 0x31, "Hangul"),
    c(0xD576, None, "HANGUL SYLLABLE HAEGG", 0x31, "Hangul"),
    c(0xD577, None, "HANGUL SYLLABLE HAEGS", 0x31, "Hangul"),
    c(0xD578, None, "HANGUL SYLLABLE HAEN", 0x31, "Hangul"),
    c(0xD579, None, "HANGUL SYLLABLE HAENJ", 0x31, "Hangul"),
    c(0xD57A, None, "HANGUL SYLLABLE HAENH", 0x31, "Hangul"),
    c(0xD57B, None, "HANGUL SYLLABLE HAED", 0x31, "Hangul"),
    c(0xD57C, None, "HANGUL SYLLABLE HAEL", 0x31, "Hangul"),
    c(0xD57D, None, "HANGUL SYLLABLE HAELG", 0x31, "Hangul"),
    c(0xD57E, None, "HANGUL SYLLABLE HAELM", 0x31, "Hangul"),
    c(0xD57F, None, "HANGUL SYLLABLE HAELB", 0x31, "Hangul"),
    c(0xD580, None, "HANGUL SYLLABLE HAELS", 0x31, "Hangul"),
    c(0xD581, None, "HANGUL SYLLABLE HAELT", 0x31, "Hangul"),
    c(0xD582, None, "HANGUL SYLLABLE HAELP", 0x31, "Hangul"),
    c(0xD583, None, "HANGUL SYLLABLE HAELH", 0x31, "Hangul"),
    c(0xD584, None, "HANGUL SYLLABLE HAEM", 0x31, "Hangul"),
    c(0xD585, None, "HANGUL SYLLABLE HAEB", 0x31, "Hangul"),
    c(0xD586, None, "HANGUL SYLLABLE HAEBS", 0x31, "Hangul"),
    c(0xD587, None, "HANGUL SYLLABLE HAES", 0x31, "Hangul"),
    c(0xD588, None, "HANGUL SYLLABLE HAESS", 0x31, "Hangul"),
    c(0xD589, None, "HANGUL SYLLABLE HAENG", 0x31, "Hangul"),
    c(0xD58A, None, "HANGUL SYLLABLE HAEJ", 0x31, "Hangul"),
    c(0xD58B, None, "HANGUL SYLLABLE HAEC", 0x31, "Hangul"),
    c(0xD58C, None, "HANGUL SYLLABLE HAEK", 0x31, "Hangul"),
    c(0xD58D, None, "HANGUL SYLLABLE HAET", 0x31, "Hangul"),
    c(0xD58E, None, "HANGUL SYLLABLE HAEP", 0x31, "Hangul"),
    c(0xD58F, None, "HANGUL SYLLABLE HAEH", 0x31, "Hangul"),
    c(0xD590, None, "HANGUL SYLLABLE HYA", 0x31, "Hangul"),
    c(0xD591, None, "HANGUL SYLLABLE HYAG", 0x31, "Hangul"),
    c(0xD592, None, "HANGUL SYLLABLE HYAGG", 0x31, "Hangul"),
    c(0xD593, None, "HANGUL SYLLABLE HYAGS", 0x31, "Hangul"),
    c(0xD594, None, "HANGUL SYLLABLE HYAN", 0x31, "Hangul"),
    c(0xD595, None, "HANGUL SYLLABLE HYANJ", 0x31, "Hangul"),
    c(0xD596, None, "HANGUL SYLLABLE HYANH", 0x31, "Hangul"),
    c(0xD597, None, "HANGUL SYLLABLE HYAD", 0x31, "Hangul"),
    c(0xD598, None, "HANGUL SYLLABLE HYAL", 0x31, "Hangul"),
    c(0xD599, None, "HANGUL SYLLABLE HYALG", 0x31, "Hangul"),
    c(0xD59A, None, "HANGUL SYLLABLE HYALM", 0x31, "Hangul"),
    c(0xD59B, None, "HANGUL SYLLABLE HYALB", 0x31, "Hangul"),
    c(0xD59C, None, "HANGUL SYLLABLE HYALS", 0x31, "Hangul"),
    c(0xD59D, None, "HANGUL SYLLABLE HYALT", 0x31, "Hangul"),
    c(0xD59E, None, "HANGUL SYLLABLE HYALP", 0x31, "Hangul"),
    c(0xD59F, None, "HANGUL SYLLABLE HYALH", 0x31, "Hangul"),
    c(0xD5A0, None, "HANGUL SYLLABLE HYAM", 0x31, "Hangul"),
    c(0xD5A1, None, "HANGUL SYLLABLE HYAB", 0x31, "Hangul"),
    c(0xD5A2, None, "HANGUL SYLLABLE HYABS", 0x31, "Hangul"),
    c(0xD5A3, None, "HANGUL SYLLABLE HYAS", 0x31, "Hangul"),
    c(0xD5A4, None, "HANGUL SYLLABLE HYASS", 0x31, "Hangul"),
    c(0xD5A5, None, "HANGUL SYLLABLE HYANG", 0x31, "Hangul"),
    c(0xD5A6, None, "HANGUL SYLLABLE HYAJ", 0x31, "Hangul"),
    c(0xD5A7, None, "HANGUL SYLLABLE HYAC", 0x31, "Hangul"),
    c(0xD5A8, None, "HANGUL SYLLABLE HYAK", 0x31, "Hangul"),
    c(0xD5A9, None, "HANGUL SYLLABLE HYAT", 0x31, "Hangul"),
    c(0xD5AA, None, "HANGUL SYLLABLE HYAP", 0x31, "Hangul"),
    c(0xD5AB, None, "HANGUL SYLLABLE HYAH", 0x31, "Hangul"),
    c(0xD5AC, None, "HANGUL SYLLABLE HYAE", 0x31, "Hangul"),
    c(0xD5AD, None, "HANGUL SYLLABLE HYAEG", 0x31, "Hangul"),
    c(0xD5AE, None, "HANGUL SYLLABLE HYAEGG", 0x31, "Hangul"),
    c(0xD5AF, None, "HANGUL SYLLABLE HYAEGS", 0x31, "Hangul"),
    c(0xD5B0, None, "HANGUL SYLLABLE HYAEN", 0x31, "Hangul"),
    c(0xD5B1, None, "HANGUL SYLLABLE HYAENJ", 0x31, "Hangul"),
    c(0xD5B2, None, "HANGUL SYLLABLE HYAENH", 0x31, "Hangul"),
    c(0xD5B3, None, "HANGUL SYLLABLE HYAED", 0x31, "Hangul"),
    c(0xD5B4, None, "HANGUL SYLLABLE HYAEL", 0x31, "Hangul"),
    c(0xD5B5, None, "HANGUL SYLLABLE HYAELG", 0x31, "Hangul"),
    c(0xD5B6, None, "HANGUL SYLLABLE HYAELM", 0x31, "Hangul"),
    c(0xD5B7, None, "HANGUL SYLLABLE HYAELB", 0x31, "Hangul"),
    c(0xD5B8, None, "HANGUL SYLLABLE HYAELS", 0x31, "Hangul"),
    c(0xD5B9, None, "HANGUL SYLLABLE HYAELT", 0x31, "Hangul"),
    c(0xD5BA, None, "HANGUL SYLLABLE HYAELP", 0x31, "Hangul"),
    c(0xD5BB, None, "HANGUL SYLLABLE HYAELH", 0x31, "Hangul"),
    c(0xD5BC, None, "HANGUL SYLLABLE HYAEM", 0x31, "Hangul"),
    c(0xD5BD, None, "HANGUL SYLLABLE HYAEB", 0x31, "Hangul"),
    c(0xD5BE, None, "HANGUL SYLLABLE HYAEBS", 0x31, "Hangul"),
    c(0xD5BF, None, "HANGUL SYLLABLE HYAES", 0x31, "Hangul"),
    c(0xD5C0, None, "HANGUL SYLLABLE HYAESS", 0x31, "Hangul"),
    c(0xD5C1, None, "HANGUL SYLLABLE HYAENG", 0x31, "Hangul"),
    c(0xD5C2, None, "HANGUL SYLLABLE HYAEJ", 0x31, "Hangul"),
    c(0xD5C3, None, "HANGUL SYLLABLE HYAEC", 0x31, "Hangul"),
    c(0xD5C4, None, "HANGUL SYLLABLE HYAEK", 0x31, "Hangul"),
    c(0xD5C5, None, "HANGUL SYLLABLE HYAET", 0x31, "Hangul"),
    c(0xD5C6, None, "HANGUL SYLLABLE HYAEP", 0x31, "Hangul"),
    c(0xD5C7, None, "HANGUL SYLLABLE HYAEH", 0x31, "Hangul"),
    c(0xD5C8, None, "HANGUL SYLLABLE HEO", 0x31, "Hangul"),
    c(0xD5C9, None, "HANGUL SYLLABLE HEOG", 0x31, "Hangul"),
    c(0xD5CA, None, "HANGUL SYLLABLE HEOGG", 0x31, "Hangul"),
    c(0xD5CB, None, "HANGUL SYLLABLE HEOGS", 0x31, "Hangul"),
    c(0xD5CC, None, "HANGUL SYLLABLE HEON", 0x31, "Hangul"),
    c(0xD5CD, None, "HANGUL SYLLABLE HEONJ", 0x31, "Hangul"),
    c(0xD5CE, None, "HANGUL SYLLABLE HEONH", 0x31, "Hangul"),
    c(0xD5CF, None, "HANGUL SYLLABLE HEOD", 0x31, "Hangul"),
    c(0xD5D0, None, "HANGUL SYLLABLE HEOL", 0x31, "Hangul"),
    c(0xD5D1, None, "HANGUL SYLLABLE HEOLG", 0x31, "Hangul"),
    c(0xD5D2, None, "HANGUL SYLLABLE HEOLM", 0x31, "Hangul"),
    c(0xD5D3, None, "HANGUL SYLLABLE HEOLB", 0x31, "Hangul"),
    c(0xD5D4, None, "HANGUL SYLLABLE HEOLS", 0x31, "Hangul"),
    c(0xD5D5, None, "HANGUL SYLLABLE HEOLT", 0x31, "Hangul"),
    c(0xD5D6, None, "HANGUL SYLLABLE HEOLP", 0x31, "Hangul"),
    c(0xD5D7, None, "HANGUL SYLLABLE HEOLH", 0x31, "Hangul"),
    c(0xD5D8, None, "HANGUL SYLLABLE HEOM", 0x31, "Hangul"),
    c(0xD5D9, None, "HANGUL SYLLABLE HEOB", 0x31, "Hangul"),
    c(0xD5DA, None, "HANGUL SYLLABLE HEOBS", 0x31, "Hangul"),
    c(0xD5DB, None, "HANGUL SYLLABLE HEOS", 0x31, "Hangul"),
    c(0xD5DC, None, "HANGUL SYLLABLE HEOSS", 0x31, "Hangul"),
    c(0xD5DD, None, "HANGUL SYLLABLE HEONG", 0x31, "Hangul"),
    c(0xD5DE, None, "HANGUL SYLLABLE HEOJ", 0x31, "Hangul"),
    c(0xD5DF, None, "HANGUL SYLLABLE HEOC", 0x31, "Hangul"),
    c(0xD5E0, None, "HANGUL SYLLABLE HEOK", 0x31, "Hangul"),
    c(0xD5E1, None, "HANGUL SYLLABLE HEOT", 0x31, "Hangul"),
    c(0xD5E2, None, "HANGUL SYLLABLE HEOP", 0x31, "Hangul"),
    c(0xD5E3, None, "HANGUL SYLLABLE HEOH", 0x31, "Hangul"),
    c(0xD5E4, None, "HANGUL SYLLABLE HE", 0x31, "Hangul"),
    c(0xD5E5, None, "HANGUL SYLLABLE HEG", 0x31, "Hangul"),
    c(0xD5E6, None, "HANGUL SYLLABLE HEGG", 0x31, "Hangul"),
    c(0xD5E7, None, "HANGUL SYLLABLE HEGS", 0x31, "Hangul"),
    c(0xD5E8, None, "HANGUL SYLLABLE HEN", 0x31, "Hangul"),
    c(0xD5E9, None, "HANGUL SYLLABLE HENJ", 0x31, "Hangul"),
    c(0xD5EA, None, "HANGUL SYLLABLE HENH", 0x31, "Hangul"),
    c(0xD5EB, None, "HANGUL SYLLABLE HED", 0x31, "Hangul"),
    c(0xD5EC, None, "HANGUL SYLLABLE HEL", 0x31, "Hangul"),
    c(0xD5ED, None, "HANGUL SYLLABLE HELG", 0x31, "Hangul"),
    c(0xD5EE, None, "HANGUL SYLLABLE HELM", 0x31, "Hangul"),
    c(0xD5EF, None, "HANGUL SYLLABLE HELB", 0x31, "Hangul"),
    c(0xD5F0, None, "HANGUL SYLLABLE HELS", 0x31, "Hangul"),
    c(0xD5F1, None, "HANGUL SYLLABLE HELT", 0x31, "Hangul"),
    c(0xD5F2, None, "HANGUL SYLLABLE HELP", 0x31, "Hangul"),
    c(0xD5F3, None, "HANGUL SYLLABLE HELH", 0x31, "Hangul"),
    c(0xD5F4, None, "HANGUL SYLLABLE HEM", 0x31, "Hangul"),
    c(0xD5F5, None, "HANGUL SYLLABLE HEB", 0x31, "Hangul"),
    c(0xD5F6, None, "HANGUL SYLLABLE HEBS", 0x31, "Hangul"),
    c(0xD5F7, None, "HANGUL SYLLABLE HES", 0x31, "Hangul"),
    c(0xD5F8, None, "HANGUL SYLLABLE HESS", 0x31, "Hangul"),
    c(0xD5F9, None, "HANGUL SYLLABLE HENG", 0x31, "Hangul"),
    c(0xD5FA, None, "HANGUL SYLLABLE HEJ", 0x31, "Hangul"),
    c(0xD5FB, None, "HANGUL SYLLABLE HEC", 0x31, "Hangul"),
    c(0xD5FC, None, "HANGUL SYLLABLE HEK", 0x31, "Hangul"),
    c(0xD5FD, None, "HANGUL SYLLABLE HET", 0x31, "Hangul"),
    c(0xD5FE, None, "HANGUL SYLLABLE HEP", 0x31, "Hangul"),
    c(0xD5FF, None, "HANGUL SYLLABLE HEH", 0x31, "Hangul"),
    c(0xD600, None, "HANGUL SYLLABLE HYEO", 0x31, "Hangul"),
    c(0xD601, None, "HANGUL SYLLABLE HYEOG", 0x31, "Hangul"),
    c(0xD602, None, "HANGUL SYLLABLE HYEOGG", 0x31, "Hangul"),
    c(0xD603, None, "HANGUL SYLLABLE HYEOGS", 0x31, "Hangul"),
    c(0xD604, None, "HANGUL SYLLABLE HYEON", 0x31, "Hangul"),
    c(0xD605, None, "HANGUL SYLLABLE HYEONJ", 0x31, "Hangul"),
    c(0xD606, None, "HANGUL SYLLABLE HYEONH", 0x31, "Hangul"),
    c(0xD607, None, "HANGUL SYLLABLE HYEOD", 0x31, "Hangul"),
    c(0xD608, None, "HANGUL SYLLABLE HYEOL", 0x31, "Hangul"),
    c(0xD609, None, "HANGUL SYLLABLE HYEOLG", 0x31, "Hangul"),
    c(0xD60A, None, "HANGUL SYLLABLE HYEOLM", 0x31, "Hangul"),
    c(0xD60B, None, "HANGUL SYLLABLE HYEOLB", 0x31, "Hangul"),
    c(0xD60C, None, "HANGUL SYLLABLE HYEOLS", 0x31, "Hangul"),
    c(0xD60D, None, "HANGUL SYLLABLE HYEOLT", 0x31, "Hangul"),
    c(0xD60E, None, "HANGUL SYLLABLE HYEOLP", 0x31, "Hangul"),
    c(0xD60F, None, "HANGUL SYLLABLE HYEOLH", 0x31, "Hangul"),
    c(0xD610, None, "HANGUL SYLLABLE HYEOM", 0x31, "Hangul"),
    c(0xD611, None, "HANGUL SYLLABLE HYEOB", 0x31, "Hangul"),
    c(0xD612, None, "HANGUL SYLLABLE HYEOBS", 0x31, "Hangul"),
    c(0xD613, None, "HANGUL SYLLABLE HYEOS", 0x31, "Hangul"),
    c(0xD614, None, "HANGUL SYLLABLE HYEOSS", 0x31, "Hangul"),
    c(0xD615, None, "HANGUL SYLLABLE HYEONG", 0x31, "Hangul"),
    c(0xD616, None, "HANGUL SYLLABLE HYEOJ", 0x31, "Hangul"),
    c(0xD617, None, "HANGUL SYLLABLE HYEOC", 0x31, "Hangul"),
    c(0xD618, None, "HANGUL SYLLABLE HYEOK", 0x31, "Hangul"),
    c(0xD619, None, "HANGUL SYLLABLE HYEOT", 0x31, "Hangul"),
    c(0xD61A, None, "HANGUL SYLLABLE HYEOP", 0x31, "Hangul"),
    c(0xD61B, None, "HANGUL SYLLABLE HYEOH", 0x31, "Hangul"),
    c(0xD61C, None, "HANGUL SYLLABLE HYE", 0x31, "Hangul"),
    c(0xD61D, None, "HANGUL SYLLABLE HYEG", 0x31, "Hangul"),
    c(0xD61E, None, "HANGUL SYLLABLE HYEGG", 0x31, "Hangul"),
    c(0xD61F, None, "HANGUL SYLLABLE HYEGS", 0x31, "Hangul"),
    c(0xD620, None, "HANGUL SYLLABLE HYEN", 0x31, "Hangul"),
    c(0xD621, None, "HANGUL SYLLABLE HYENJ", 0x31, "Hangul"),
    c(0xD622, None, "HANGUL SYLLABLE HYENH", 0x31, "Hangul"),
    c(0xD623, None, "HANGUL SYLLABLE HYED", 0x31, "Hangul"),
    c(0xD624, None, "HANGUL SYLLABLE HYEL", 0x31, "Hangul"),
    c(0xD625, None, "HANGUL SYLLABLE HYELG", 0x31, "Hangul"),
    c(0xD626, None, "HANGUL SYLLABLE HYELM", 0x31, "Hangul"),
    c(0xD627, None, "HANGUL SYLLABLE HYELB", 0x31, "Hangul"),
    c(0xD628, None, "HANGUL SYLLABLE HYELS", 0x31, "Hangul"),
    c(0xD629, None, "HANGUL SYLLABLE HYELT", 0x31, "Hangul"),
    c(0xD62A, None, "HANGUL SYLLABLE HYELP", 0x31, "Hangul"),
    c(0xD62B, None, "HANGUL SYLLABLE HYELH", 0x31, "Hangul"),
    c(0xD62C, None, "HANGUL SYLLABLE HYEM", 0x31, "Hangul"),
    c(0xD62D, None, "HANGUL SYLLABLE HYEB", 0x31, "Hangul"),
    c(0xD62E, None, "HANGUL SYLLABLE HYEBS", 0x31, "Hangul"),
    c(0xD62F, None, "HANGUL SYLLABLE HYES", 0x31, "Hangul"),
    c(0xD630, None, "HANGUL SYLLABLE HYESS", 0x31, "Hangul"),
    c(0xD631, None, "HANGUL SYLLABLE HYENG", 0x31, "Hangul"),
    c(0xD632, None, "HANGUL SYLLABLE HYEJ", 0x31, "Hangul"),
    c(0xD633, None, "HANGUL SYLLABLE HYEC", 0x31, "Hangul"),
    c(0xD634, None, "HANGUL SYLLABLE HYEK", 0x31, "Hangul"),
    c(0xD635, None, "HANGUL SYLLABLE HYET", 0x31, "Hangul"),
    c(0xD636, None, "HANGUL SYLLABLE HYEP", 0x31, "Hangul"),
    c(0xD637, None, "HANGUL SYLLABLE HYEH", 0x31, "Hangul"),
    c(0xD638, None, "HANGUL SYLLABLE HO", 0x31, "Hangul"),
    c(0xD639, None, "HANGUL SYLLABLE HOG", 0x31, "Hangul"),
    c(0xD63A, None, "HANGUL SYLLABLE HOGG", 0x31, "Hangul"),
    c(0xD63B, None, "HANGUL SYLLABLE HOGS", 0x31, "Hangul"),
    c(0xD63C, None, "HANGUL SYLLABLE HON", 0x31, "Hangul"),
    c(0xD63D, None, "HANGUL SYLLABLE HONJ", 0x31, "Hangul"),
    c(0xD63E, None, "HANGUL SYLLABLE HONH", 0x31, "Hangul"),
    c(0xD63F, None, "HANGUL SYLLABLE HOD", 0x31, "Hangul"),
    c(0xD640, None, "HANGUL SYLLABLE HOL", 0x31, "Hangul"),
    c(0xD641, None, "HANGUL SYLLABLE HOLG", 0x31, "Hangul"),
    c(0xD642, None, "HANGUL SYLLABLE HOLM", 0x31, "Hangul"),
    c(0xD643, None, "HANGUL SYLLABLE HOLB", 0x31, "Hangul"),
    c(0xD644, None, "HANGUL SYLLABLE HOLS", 0x31, "Hangul"),
    c(0xD645, None, "HANGUL SYLLABLE HOLT", 0x31, "Hangul"),
    c(0xD646, None, "HANGUL SYLLABLE HOLP", 0x31, "Hangul"),
    c(0xD647, None, "HANGUL SYLLABLE HOLH", 0x31, "Hangul"),
    c(0xD648, None, "HANGUL SYLLABLE HOM", 0x31, "Hangul"),
    c(0xD649, None, "HANGUL SYLLABLE HOB", 0x31, "Hangul"),
    c(0xD64A, None, "HANGUL SYLLABLE HOBS", 0x31, "Hangul"),
    c(0xD64B, None, "HANGUL SYLLABLE HOS", 0x31, "Hangul"),
    c(0xD64C, None, "HANGUL SYLLABLE HOSS", 0x31, "Hangul"),
    c(0xD64D, None, "HANGUL SYLLABLE HONG", 0x31, "Hangul"),
    c(0xD64E, None, "HANGUL SYLLABLE HOJ", 0x31, "Hangul"),
    c(0xD64F, None, "HANGUL SYLLABLE HOC", 0x31, "Hangul"),
    c(0xD650, None, "HANGUL SYLLABLE HOK", 0x31, "Hangul"),
    c(0xD651, None, "HANGUL SYLLABLE HOT", 0x31, "Hangul"),
    c(0xD652, None, "HANGUL SYLLABLE HOP", 0x31, "Hangul"),
    c(0xD653, None, "HANGUL SYLLABLE HOH", 0x31, "Hangul"),
    c(0xD654, None, "HANGUL SYLLABLE HWA", 0x31, "Hangul"),
    c(0xD655, None, "HANGUL SYLLABLE HWAG", 0x31, "Hangul"),
    c(0xD656, None, "HANGUL SYLLABLE HWAGG", 0x31, "Hangul"),
    c(0xD657, None, "HANGUL SYLLABLE HWAGS", 0x31, "Hangul"),
    c(0xD658, None, "HANGUL SYLLABLE HWAN", 0x31, "Hangul"),
    c(0xD659, None, "HANGUL SYLLABLE HWANJ", 0x31, "Hangul"),
    c(0xD65A, None, "HANGUL SYLLABLE HWANH", 0x31, "Hangul"),
    c(0xD65B, None, "HANGUL SYLLABLE HWAD", 0x31, "Hangul"),
    c(0xD65C, None, "HANGUL SYLLABLE HWAL", 0x31, "Hangul"),
    c(0xD65D, None, "HANGUL SYLLABLE HWALG", 0x31, "Hangul"),
    c(0xD65E, None, "HANGUL SYLLABLE HWALM", 0x31, "Hangul"),
    c(0xD65F, None, "HANGUL SYLLABLE HWALB", 0x31, "Hangul"),
    c(0xD660, None, "HANGUL SYLLABLE HWALS", 0x31, "Hangul"),
    c(0xD661, None, "HANGUL SYLLABLE HWALT", 0x31, "Hangul"),
    c(0xD662, None, "HANGUL SYLLABLE HWALP", 0x31, "Hangul"),
    c(0xD663, None, "HANGUL SYLLABLE HWALH", 0x31, "Hangul"),
    c(0xD664, None, "HANGUL SYLLABLE HWAM", 0x31, "Hangul"),
    c(0xD665, None, "HANGUL SYLLABLE HWAB", 0x31, "Hangul"),
    c(0xD666, None, "HANGUL SYLLABLE HWABS", 0x31, "Hangul"),
    c(0xD667, None, "HANGUL SYLLABLE HWAS", 0x31, "Hangul"),
    c(0xD668, None, "HANGUL SYLLABLE HWASS", 0x31, "Hangul"),
    c(0xD669, None, "HANGUL SYLLABLE HWANG", 0x31, "Hangul"),
    c(0xD66A, None, "HANGUL SYLLABLE HWAJ", 0x31, "Hangul"),
    c(0xD66B, None, "HANGUL SYLLABLE HWAC", 0x31, "Hangul"),
    c(0xD66C, None, "HANGUL SYLLABLE HWAK", 0x31, "Hangul"),
    c(0xD66D, None, "HANGUL SYLLABLE HWAT", 0x31, "Hangul"),
    c(0xD66E, None, "HANGUL SYLLABLE HWAP", 0x31, "Hangul"),
    c(0xD66F, None, "HANGUL SYLLABLE HWAH", 0x31, "Hangul"),
    c(0xD670, None, "HANGUL SYLLABLE HWAE", 0x31, "Hangul"),
    c(0xD671, None, "HANGUL SYLLABLE HWAEG", 0x31, "Hangul"),
    c(0xD672, None, "HANGUL SYLLABLE HWAEGG", 0x31, "Hangul"),
    c(0xD673, None, "HANGUL SYLLABLE HWAEGS", 0x31, "Hangul"),
    c(0xD674, None, "HANGUL SYLLABLE HWAEN", 0x31, "Hangul"),
    c(0xD675, None, "HANGUL SYLLABLE HWAENJ", 0x31, "Hangul"),
    c(0xD676, None, "HANGUL SYLLABLE HWAENH", 0x31, "Hangul"),
    c(0xD677, None, "HANGUL SYLLABLE HWAED", 0x31, "Hangul"),
    c(0xD678, None, "HANGUL SYLLABLE HWAEL", 0x31, "Hangul"),
    c(0xD679, None, "HANGUL SYLLABLE HWAELG", 0x31, "Hangul"),
    c(0xD67A, None, "HANGUL SYLLABLE HWAELM", 0x31, "Hangul"),
    c(0xD67B, None, "HANGUL SYLLABLE HWAELB", 0x31, "Hangul"),
    c(0xD67C, None, "HANGUL SYLLABLE HWAELS", 0x31, "Hangul"),
    c(0xD67D, None, "HANGUL SYLLABLE HWAELT", 0x31, "Hangul"),
    c(0xD67E, None, "HANGUL SYLLABLE HWAELP", 0x31, "Hangul"),
    c(0xD67F, None, "HANGUL SYLLABLE HWAELH", 0x31, "Hangul"),
    c(0xD680, None, "HANGUL SYLLABLE HWAEM", 0x31, "Hangul"),
    c(0xD681, None, "HANGUL SYLLABLE HWAEB", 0x31, "Hangul"),
    c(0xD682, None, "HANGUL SYLLABLE HWAEBS", 0x31, "Hangul"),
    c(0xD683, None, "HANGUL SYLLABLE HWAES", 0x31, "Hangul"),
    c(0xD684, None, "HANGUL SYLLABLE HWAESS", 0x31, "Hangul"),
    c(0xD685, None, "HANGUL SYLLABLE HWAENG", 0x31, "Hangul"),
    c(0xD686, None, "HANGUL SYLLABLE HWAEJ", 0x31, "Hangul"),
    c(0xD687, None, "HANGUL SYLLABLE HWAEC", 0x31, "Hangul"),
    c(0xD688, None, "HANGUL SYLLABLE HWAEK", 0x31, "Hangul"),
    c(0xD689, None, "HANGUL SYLLABLE HWAET", 0x31, "Hangul"),
    c(0xD68A, None, "HANGUL SYLLABLE HWAEP", 0x31, "Hangul"),
    c(0xD68B, None, "HANGUL SYLLABLE HWAEH", 0x31, "Hangul"),
    c(0xD68C, None, "HANGUL SYLLABLE HOE", 0x31, "Hangul"),
    c(0xD68D, None, "HANGUL SYLLABLE HOEG", 0x31, "Hangul"),
    c(0xD68E, None, "HANGUL SYLLABLE HOEGG", 0x31, "Hangul"),
    c(0xD68F, None, "HANGUL SYLLABLE HOEGS", 0x31, "Hangul"),
    c(0xD690, None, "HANGUL SYLLABLE HOEN", 0x31, "Hangul"),
    c(0xD691, None, "HANGUL SYLLABLE HOENJ", 0x31, "Hangul"),
    c(0xD692, None, "HANGUL SYLLABLE HOENH", 0x31, "Hangul"),
    c(0xD693, None, "HANGUL SYLLABLE HOED", 0x31, "Hangul"),
    c(0xD694, None, "HANGUL SYLLABLE HOEL", 0x31, "Hangul"),
    c(0xD695, None, "HANGUL SYLLABLE HOELG", 0x31, "Hangul"),
    c(0xD696, None, "HANGUL SYLLABLE HOELM", 0x31, "Hangul"),
    c(0xD697, None, "HANGUL SYLLABLE HOELB", 0x31, "Hangul"),
    c(0xD698, None, "HANGUL SYLLABLE HOELS", 0x31, "Hangul"),
    c(0xD699, None, "HANGUL SYLLABLE HOELT", 0x31, "Hangul"),
    c(0xD69A, None, "HANGUL SYLLABLE HOELP", 0x31, "Hangul"),
    c(0xD69B, None, "HANGUL SYLLABLE HOELH", 0x31, "Hangul"),
    c(0xD69C, None, "HANGUL SYLLABLE HOEM", 0x31, "Hangul"),
    c(0xD69D, None, "HANGUL SYLLABLE HOEB", 0x31, "Hangul"),
    c(0xD69E, None, "HANGUL SYLLABLE HOEBS", 0x31, "Hangul"),
    c(0xD69F, None, "HANGUL SYLLABLE HOES", 0x31, "Hangul"),
    c(0xD6A0, None, "HANGUL SYLLABLE HOESS", 0x31, "Hangul"),
    c(0xD6A1, None, "HANGUL SYLLABLE HOENG", 0x31, "Hangul"),
    c(0xD6A2, None, "HANGUL SYLLABLE HOEJ", 0x31, "Hangul"),
    c(0xD6A3, None, "HANGUL SYLLABLE HOEC", 0x31, "Hangul"),
    c(0xD6A4, None, "HANGUL SYLLABLE HOEK", 0x31, "Hangul"),
    c(0xD6A5, None, "HANGUL SYLLABLE HOET", 0x31, "Hangul"),
    c(0xD6A6, None, "HANGUL SYLLABLE HOEP", 0x31, "Hangul"),
    c(0xD6A7, None, "HANGUL SYLLABLE HOEH", 0x31, "Hangul"),
    c(0xD6A8, None, "HANGUL SYLLABLE HYO", 0x31, "Hangul"),
    c(0xD6A9, None, "HANGUL SYLLABLE HYOG", 0x31, "Hangul"),
    c(0xD6AA, None, "HANGUL SYLLABLE HYOGG", 0x31, "Hangul"),
    c(0xD6AB, None, "HANGUL SYLLABLE HYOGS", 0x31, "Hangul"),
    c(0xD6AC, None, "HANGUL SYLLABLE HYON", 0x31, "Hangul"),
    c(0xD6AD, None, "HANGUL SYLLABLE HYONJ", 0x31, "Hangul"),
    c(0xD6AE, None, "HANGUL SYLLABLE HYONH", 0x31, "Hangul"),
    c(0xD6AF, None, "HANGUL SYLLABLE HYOD", 0x31, "Hangul"),
    c(0xD6B0, None, "HANGUL SYLLABLE HYOL", 0x31, "Hangul"),
    c(0xD6B1, None, "HANGUL SYLLABLE HYOLG", 0x31, "Hangul"),
    c(0xD6B2, None, "HANGUL SYLLABLE HYOLM", 0x31, "Hangul"),
    c(0xD6B3, None, "HANGUL SYLLABLE HYOLB", 0x31, "Hangul"),
    c(0xD6B4, None, "HANGUL SYLLABLE HYOLS", 0x31, "Hangul"),
    c(0xD6B5, None, "HANGUL SYLLABLE HYOLT", 0x31, "Hangul"),
    c(0xD6B6, None, "HANGUL SYLLABLE HYOLP", 0x31, "Hangul"),
    c(0xD6B7, None, "HANGUL SYLLABLE HYOLH", 0x31, "Hangul"),
    c(0xD6B8, None, "HANGUL SYLLABLE HYOM", 0x31, "Hangul"),
    c(0xD6B9, None, "HANGUL SYLLABLE HYOB", 0x31, "Hangul"),
    c(0xD6BA, None, "HANGUL SYLLABLE HYOBS", 0x31, "Hangul"),
    c(0xD6BB, None, "HANGUL SYLLABLE HYOS", 0x31, "Hangul"),
    c(0xD6BC, None, "HANGUL SYLLABLE HYOSS", 0x31, "Hangul"),
    c(0xD6BD, None, "HANGUL SYLLABLE HYONG", 0x31, "Hangul"),
    c(0xD6BE, None, "HANGUL SYLLABLE HYOJ", 0x31, "Hangul"),
    c(0xD6BF, None, "HANGUL SYLLABLE HYOC", 0x31, "Hangul"),
    c(0xD6C0, None, "HANGUL SYLLABLE HYOK", 0x31, "Hangul"),
    c(0xD6C1, None, "HANGUL SYLLABLE HYOT", 0x31, "Hangul"),
    c(0xD6C2, None, "HANGUL SYLLABLE HYOP", 0x31, "Hangul"),
    c(0xD6C3, None, "HANGUL SYLLABLE HYOH", 0x31, "Hangul"),
    c(0xD6C4, None, "HANGUL SYLLABLE HU", 0x31, "Hangul"),
    c(0xD6C5, None, "HANGUL SYLLABLE HUG", 0x31, "Hangul"),
    c(0xD6C6, None, "HANGUL SYLLABLE HUGG", 0x31, "Hangul"),
    c(0xD6C7, None, "HANGUL SYLLABLE HUGS", 0x31, "Hangul"),
    c(0xD6C8, None, "HANGUL SYLLABLE HUN", 0x31, "Hangul"),
    c(0xD6C9, None, "HANGUL SYLLABLE HUNJ", 0x31, "Hangul"),
    c(0xD6CA, None, "HANGUL SYLLABLE HUNH", 0x31, "Hangul"),
    c(0xD6CB, None, "HANGUL SYLLABLE HUD", 0x31, "Hangul"),
    c(0xD6CC, None, "HANGUL SYLLABLE HUL", 0x31, "Hangul"),
    c(0xD6CD, None, "HANGUL SYLLABLE HULG", 0x31, "Hangul"),
    c(0xD6CE, None, "HANGUL SYLLABLE HULM", 0x31, "Hangul"),
    c(0xD6CF, None, "HANGUL SYLLABLE HULB", 0x31, "Hangul"),
    c(0xD6D0, None, "HANGUL SYLLABLE HULS", 0x31, "Hangul"),
    c(0xD6D1, None, "HANGUL SYLLABLE HULT", 0x31, "Hangul"),
    c(0xD6D2, None, "HANGUL SYLLABLE HULP", 0x31, "Hangul"),
    c(0xD6D3, None, "HANGUL SYLLABLE HULH", 0x31, "Hangul"),
    c(0xD6D4, None, "HANGUL SYLLABLE HUM", 0x31, "Hangul"),
    c(0xD6D5, None, "HANGUL SYLLABLE HUB", 0x31, "Hangul"),
    c(0xD6D6, None, "HANGUL SYLLABLE HUBS", 0x31, "Hangul"),
    c(0xD6D7, None, "HANGUL SYLLABLE HUS", 0x31, "Hangul"),
    c(0xD6D8, None, "HANGUL SYLLABLE HUSS", 0x31, "Hangul"),
    c(0xD6D9, None, "HANGUL SYLLABLE HUNG", 0x31, "Hangul"),
    c(0xD6DA, None, "HANGUL SYLLABLE HUJ", 0x31, "Hangul"),
    c(0xD6DB, None, "HANGUL SYLLABLE HUC", 0x31, "Hangul"),
    c(0xD6DC, None, "HANGUL SYLLABLE HUK", 0x31, "Hangul"),
    c(0xD6DD, None, "HANGUL SYLLABLE HUT", 0x31, "Hangul"),
    c(0xD6DE, None, "HANGUL SYLLABLE HUP", 0x31, "Hangul"),
    c(0xD6DF, None, "HANGUL SYLLABLE HUH", 0x31, "Hangul"),
    c(0xD6E0, None, "HANGUL SYLLABLE HWEO", 0x31, "Hangul"),
    c(0xD6E1, None, "HANGUL SYLLABLE HWEOG", 0x31, "Hangul"),
    c(0xD6E2, None, "HANGUL SYLLABLE HWEOGG", 0x31, "Hangul"),
    c(0xD6E3, None, "HANGUL SYLLABLE HWEOGS", 0x31, "Hangul"),
    c(0xD6E4, None, "HANGUL SYLLABLE HWEON", 0x31, "Hangul"),
    c(0xD6E5, None, "HANGUL SYLLABLE HWEONJ", 0x31, "Hangul"),
    c(0xD6E6, None, "HANGUL SYLLABLE HWEONH", 0x31, "Hangul"),
    c(0xD6E7, None, "HANGUL SYLLABLE HWEOD", 0x31, "Hangul"),
    c(0xD6E8, None, "HANGUL SYLLABLE HWEOL", 0x31, "Hangul"),
    c(0xD6E9, None, "HANGUL SYLLABLE HWEOLG", 0x31, "Hangul"),
    c(0xD6EA, None, "HANGUL SYLLABLE HWEOLM", 0x31, "Hangul"),
    c(0xD6EB, None, "HANGUL SYLLABLE HWEOLB", 0x31, "Hangul"),
    c(0xD6EC, None, "HANGUL SYLLABLE HWEOLS", 0x31, "Hangul"),
    c(0xD6ED, None, "HANGUL SYLLABLE HWEOLT", 0x31, "Hangul"),
    c(0xD6EE, None, "HANGUL SYLLABLE HWEOLP", 0x31, "Hangul"),
    c(0xD6EF, None, "HANGUL SYLLABLE HWEOLH", 0x31, "Hangul"),
    c(0xD6F0, None, "HANGUL SYLLABLE HWEOM", 0x31, "Hangul"),
    c(0xD6F1, None, "HANGUL SYLLABLE HWEOB", 0x31, "Hangul"),
    c(0xD6F2, None, "HANGUL SYLLABLE HWEOBS", 0x31, "Hangul"),
    c(0xD6F3, None, "HANGUL SYLLABLE HWEOS", 0x31, "Hangul"),
    c(0xD6F4, None, "HANGUL SYLLABLE HWEOSS", 0x31, "Hangul"),
    c(0xD6F5, None, "HANGUL SYLLABLE HWEONG", 0x31, "Hangul"),
    c(0xD6F6, None, "HANGUL SYLLABLE HWEOJ", 0x31, "Hangul"),
    c(0xD6F7, None, "HANGUL SYLLABLE HWEOC", 0x31, "Hangul"),
    c(0xD6F8, None, "HANGUL SYLLABLE HWEOK", 0x31, "Hangul"),
    c(0xD6F9, None, "HANGUL SYLLABLE HWEOT", 0x31, "Hangul"),
    c(0xD6FA, None, "HANGUL SYLLABLE HWEOP", 0x31, "Hangul"),
    c(0xD6FB, None, "HANGUL SYLLABLE HWEOH", 0x31, "Hangul"),
    c(0xD6FC, None, "HANGUL SYLLABLE HWE", 0x31, "Hangul"),
    c(0xD6FD, None, "HANGUL SYLLABLE HWEG", 0x31, "Hangul"),
    c(0xD6FE, None, "HANGUL SYLLABLE HWEGG", 0x31, "Hangul"),
    c(0xD6FF, None, "HANGUL SYLLABLE HWEGS", 0x31, "Hangul"),
    c(0xD700, None, "HANGUL SYLLABLE HWEN", 0x31, "Hangul"),
    c(0xD701, None, "HANGUL SYLLABLE HWENJ", 0x31, "Hangul"),
    c(0xD702, None, "HANGUL SYLLABLE HWENH", 0x31, "Hangul"),
    c(0xD703, None, "HANGUL SYLLABLE HWED", 0x31, "Hangul"),
    c(0xD704, None, "HANGUL SYLLABLE HWEL", 0x31, "Hangul"),
    c(0xD705, None, "HANGUL SYLLABLE HWELG", 0x31, "Hangul"),
    c(0xD706, None, "HANGUL SYLLABLE HWELM", 0x31, "Hangul"),
    c(0xD707, None, "HANGUL SYLLABLE HWELB", 0x31, "Hangul"),
    c(0xD708, None, "HANGUL SYLLABLE HWELS", 0x31, "Hangul"),
    c(0xD709, None, "HANGUL SYLLABLE HWELT", 0x31, "Hangul"),
    c(0xD70A, None, "HANGUL SYLLABLE HWELP", 0x31, "Hangul"),
    c(0xD70B, None, "HANGUL SYLLABLE HWELH", 0x31, "Hangul"),
    c(0xD70C, None, "HANGUL SYLLABLE HWEM", 0x31, "Hangul"),
    c(0xD70D, None, "HANGUL SYLLABLE HWEB", 0x31, "Hangul"),
    c(0xD70E, None, "HANGUL SYLLABLE HWEBS", 0x31, "Hangul"),
    c(0xD70F, None, "HANGUL SYLLABLE HWES", 0x31, "Hangul"),
    c(0xD710, None, "HANGUL SYLLABLE HWESS", 0x31, "Hangul"),
    c(0xD711, None, "HANGUL SYLLABLE HWENG", 0x31, "Hangul"),
    c(0xD712, None, "HANGUL SYLLABLE HWEJ", 0x31, "Hangul"),
    c(0xD713, None, "HANGUL SYLLABLE HWEC", 0x31, "Hangul"),
    c(0xD714, None, "HANGUL SYLLABLE HWEK", 0x31, "Hangul"),
    c(0xD715, None, "HANGUL SYLLABLE HWET", 0x31, "Hangul"),
    c(0xD716, None, "HANGUL SYLLABLE HWEP", 0x31, "Hangul"),
    c(0xD717, None, "HANGUL SYLLABLE HWEH", 0x31, "Hangul"),
    c(0xD718, None, "HANGUL SYLLABLE HWI", 0x31, "Hangul"),
    c(0xD719, None, "HANGUL SYLLABLE HWIG", 0x31, "Hangul"),
    c(0xD71A, None, "HANGUL SYLLABLE HWIGG", 0x31, "Hangul"),
    c(0xD71B, None, "HANGUL SYLLABLE HWIGS", 0x31, "Hangul"),
    c(0xD71C, None, "HANGUL SYLLABLE HWIN", 0x31, "Hangul"),
    c(0xD71D, None, "HANGUL SYLLABLE HWINJ", 0x31, "Hangul"),
    c(0xD71E, None, "HANGUL SYLLABLE HWINH", 0x31, "Hangul"),
    c(0xD71F, None, "HANGUL SYLLABLE HWID", 0x31, "Hangul"),
    c(0xD720, None, "HANGUL SYLLABLE HWIL", 0x31, "Hangul"),
    c(0xD721, None, "HANGUL SYLLABLE HWILG", 0x31, "Hangul"),
    c(0xD722, None, "HANGUL SYLLABLE HWILM", 0x31, "Hangul"),
    c(0xD723, None, "HANGUL SYLLABLE HWILB", 0x31, "Hangul"),
    c(0xD724, None, "HANGUL SYLLABLE HWILS", 0x31, "Hangul"),
    c(0xD725, None, "HANGUL SYLLABLE HWILT", 0x31, "Hangul"),
    c(0xD726, None, "HANGUL SYLLABLE HWILP", 0x31, "Hangul"),
    c(0xD727, None, "HANGUL SYLLABLE HWILH", 0x31, "Hangul"),
    c(0xD728, None, "HANGUL SYLLABLE HWIM", 0x31, "Hangul"),
    c(0xD729, None, "HANGUL SYLLABLE HWIB", 0x31, "Hangul"),
    c(0xD72A, None, "HANGUL SYLLABLE HWIBS", 0x31, "Hangul"),
    c(0xD72B, None, "HANGUL SYLLABLE HWIS", 0x31, "Hangul"),
    c(0xD72C, None, "HANGUL SYLLABLE HWISS", 0x31, "Hangul"),
    c(0xD72D, None, "HANGUL SYLLABLE HWING", 0x31, "Hangul"),
    c(0xD72E, None, "HANGUL SYLLABLE HWIJ", 0x31, "Hangul"),
    c(0xD72F, None, "HANGUL SYLLABLE HWIC", 0x31, "Hangul"),
    c(0xD730, None, "HANGUL SYLLABLE HWIK", 0x31, "Hangul"),
    c(0xD731, None, "HANGUL SYLLABLE HWIT", 0x31, "Hangul"),
    c(0xD732, None, "HANGUL SYLLABLE HWIP", 0x31, "Hangul"),
    c(0xD733, None, "HANGUL SYLLABLE HWIH", 0x31, "Hangul"),
    c(0xD734, None, "HANGUL SYLLABLE HYU", 0x31, "Hangul"),
    c(0xD735, None, "HANGUL SYLLABLE HYUG", 0x31, "Hangul"),
    c(0xD736, None, "HANGUL SYLLABLE HYUGG", 0x31, "Hangul"),
    c(0xD737, None, "HANGUL SYLLABLE HYUGS", 0x31, "Hangul"),
    c(0xD738, None, "HANGUL SYLLABLE HYUN", 0x31, "Hangul"),
    c(0xD739, None, "HANGUL SYLLABLE HYUNJ", 0x31, "Hangul"),
    c(0xD73A, None, "HANGUL SYLLABLE HYUNH", 0x31, "Hangul"),
    c(0xD73B, None, "HANGUL SYLLABLE HYUD", 0x31, "Hangul"),
    c(0xD73C, None, "HANGUL SYLLABLE HYUL", 0x31, "Hangul"),
    c(0xD73D, None, "HANGUL SYLLABLE HYULG", 0x31, "Hangul"),
    c(0xD73E, None, "HANGUL SYLLABLE HYULM", 0x31, "Hangul"),
    c(0xD73F, None, "HANGUL SYLLABLE HYULB", 0x31, "Hangul"),
    c(0xD740, None, "HANGUL SYLLABLE HYULS", 0x31, "Hangul"),
    c(0xD741, None, "HANGUL SYLLABLE HYULT", 0x31, "Hangul"),
    c(0xD742, None, "HANGUL SYLLABLE HYULP", 0x31, "Hangul"),
    c(0xD743, None, "HANGUL SYLLABLE HYULH", 0x31, "Hangul"),
    c(0xD744, None, "HANGUL SYLLABLE HYUM", 0x31, "Hangul"),
    c(0xD745, None, "HANGUL SYLLABLE HYUB", 0x31, "Hangul"),
    c(0xD746, None, "HANGUL SYLLABLE HYUBS", 0x31, "Hangul"),
    c(0xD747, None, "HANGUL SYLLABLE HYUS", 0x31, "Hangul"),
    c(0xD748, None, "HANGUL SYLLABLE HYUSS", 0x31, "Hangul"),
    c(0xD749, None, "HANGUL SYLLABLE HYUNG", 0x31, "Hangul"),
    c(0xD74A, None, "HANGUL SYLLABLE HYUJ", 0x31, "Hangul"),
    c(0xD74B, None, "HANGUL SYLLABLE HYUC", 0x31, "Hangul"),
    c(0xD74C, None, "HANGUL SYLLABLE HYUK", 0x31, "Hangul"),
    c(0xD74D, None, "HANGUL SYLLABLE HYUT", 0x31, "Hangul"),
    c(0xD74E, None, "HANGUL SYLLABLE HYUP", 0x31, "Hangul"),
    c(0xD74F, None, "HANGUL SYLLABLE HYUH", 0x31, "Hangul"),
    c(0xD750, None, "HANGUL SYLLABLE HEU", 0x31, "Hangul"),
    c(0xD751, None, "HANGUL SYLLABLE HEUG", 0x31, "Hangul"),
    c(0xD752, None, "HANGUL SYLLABLE HEUGG", 0x31, "Hangul"),
    c(0xD753, None, "HANGUL SYLLABLE HEUGS", 0x31, "Hangul"),
    c(0xD754, None, "HANGUL SYLLABLE HEUN", 0x31, "Hangul"),
    c(0xD755, None, "HANGUL SYLLABLE HEUNJ", 0x31, "Hangul"),
    c(0xD756, None, "HANGUL SYLLABLE HEUNH", 0x31, "Hangul"),
    c(0xD757, None, "HANGUL SYLLABLE HEUD", 0x31, "Hangul"),
    c(0xD758, None, "HANGUL SYLLABLE HEUL", 0x31, "Hangul"),
    c(0xD759, None, "HANGUL SYLLABLE HEULG", 0x31, "Hangul"),
    c(0xD75A, None, "HANGUL SYLLABLE HEULM", 0x31, "Hangul"),
    c(0xD75B, None, "HANGUL SYLLABLE HEULB", 0x31, "Hangul"),
    c(0xD75C, None, "HANGUL SYLLABLE HEULS", 0x31, "Hangul"),
    c(0xD75D, None, "HANGUL SYLLABLE HEULT", 0x31, "Hangul"),
    c(0xD75E, None, "HANGUL SYLLABLE HEULP", 0x31, "Hangul"),
    c(0xD75F, None, "HANGUL SYLLABLE HEULH", 0x31, "Hangul"),
    c(0xD760, None, "HANGUL SYLLABLE HEUM", 0x31, "Hangul"),
    c(0xD761, None, "HANGUL SYLLABLE HEUB", 0x31, "Hangul"),
    c(0xD762, None, "HANGUL SYLLABLE HEUBS", 0x31, "Hangul"),
    c(0xD763, None, "HANGUL SYLLABLE HEUS", 0x31, "Hangul"),
    c(0xD764, None, "HANGUL SYLLABLE HEUSS", 0x31, "Hangul"),
    c(0xD765, None, "HANGUL SYLLABLE HEUNG", 0x31, "Hangul"),
    c(0xD766, None, "HANGUL SYLLABLE HEUJ", 0x31, "Hangul"),
    c(0xD767, None, "HANGUL SYLLABLE HEUC", 0x31, "Hangul"),
    c(0xD768, None, "HANGUL SYLLABLE HEUK", 0x31, "Hangul"),
    c(0xD769, None, "HANGUL SYLLABLE HEUT", 0x31, "Hangul"),
    c(0xD76A, None, "HANGUL SYLLABLE HEUP", 0x31, "Hangul"),
    c(0xD76B, None, "HANGUL SYLLABLE HEUH", 0x31, "Hangul"),
    c(0xD76C, None, "HANGUL SYLLABLE HYI", 0x31, "Hangul"),
    c(0xD76D, None, "HANGUL SYLLABLE HYIG", 0x31, "Hangul"),
    c(0xD76E, None, "HANGUL SYLLABLE HYIGG", 0x31, "Hangul"),
    c(0xD76F, None, "HANGUL SYLLABLE HYIGS", 0x31, "Hangul"),
    c(0xD770, None, "HANGUL SYLLABLE HYIN", 0x31, "Hangul"),
    c(0xD771, None, "HANGUL SYLLABLE HYINJ", 0x31, "Hangul"),
    c(0xD772, None, "HANGUL SYLLABLE HYINH", 0x31, "Hangul"),
    c(0xD773, None, "HANGUL SYLLABLE HYID", 0x31, "Hangul"),
    c(0xD774, None, "HANGUL SYLLABLE HYIL", 0x31, "Hangul"),
    c(0xD775, None, "HANGUL SYLLABLE HYILG", 0x31, "Hangul"),
    c(0xD776, None, "HANGUL SYLLABLE HYILM", 0x31, "Hangul"),
    c(0xD777, None, "HANGUL SYLLABLE HYILB", 0x31, "Hangul"),
    c(0xD778, None, "HANGUL SYLLABLE HYILS", 0x31, "Hangul"),
    c(0xD779, None, "HANGUL SYLLABLE HYILT", 0x31, "Hangul"),
    c(0xD77A, None, "HANGUL SYLLABLE HYILP", 0x31, "Hangul"),
    c(0xD77B, None, "HANGUL SYLLABLE HYILH", 0x31, "Hangul"),
    c(0xD77C, None, "HANGUL SYLLABLE HYIM", 0x31, "Hangul"),
    c(0xD77D, None, "HANGUL SYLLABLE HYIB", 0x31, "Hangul"),
    c(0xD77E, None, "HANGUL SYLLABLE HYIBS", 0x31, "Hangul"),
    c(0xD77F, None, "HANGUL SYLLABLE HYIS", 0x31, "Hangul"),
    c(0xD780, None, "HANGUL SYLLABLE HYISS", 0x31, "Hangul"),
    c(0xD781, None, "HANGUL SYLLABLE HYING", 0x31, "Hangul"),
    c(0xD782, None, "HANGUL SYLLABLE HYIJ", 0x31, "Hangul"),
    c(0xD783, None, "HANGUL SYLLABLE HYIC", 0x31, "Hangul"),
    c(0xD784, None, "HANGUL SYLLABLE HYIK", 0x31, "Hangul"),
    c(0xD785, None, "HANGUL SYLLABLE HYIT", 0x31, "Hangul"),
    c(0xD786, None, "HANGUL SYLLABLE HYIP", 0x31, "Hangul"),
    c(0xD787, None, "HANGUL SYLLABLE HYIH", 0x31, "Hangul"),
    c(0xD788, None, "HANGUL SYLLABLE HI", 0x31, "Hangul"),
    c(0xD789, None, "HANGUL SYLLABLE HIG", 0x31, "Hangul"),
    c(0xD78A, None, "HANGUL SYLLABLE HIGG", 0x31, "Hangul"),
    c(0xD78B, None, "HANGUL SYLLABLE HIGS", 0x31, "Hangul"),
    c(0xD78C, None, "HANGUL SYLLABLE HIN", 0x31, "Hangul"),
    c(0xD78D, None, "HANGUL SYLLABLE HINJ", 0x31, "Hangul"),
    c(0xD78E, None, "HANGUL SYLLABLE HINH", 0x31, "Hangul"),
    c(0xD78F, None, "HANGUL SYLLABLE HID", 0x31, "Hangul"),
    c(0xD790, None, "HANGUL SYLLABLE HIL", 0x31, "Hangul"),
    c(0xD791, None, "HANGUL SYLLABLE HILG", 0x31, "Hangul"),
    c(0xD792, None, "HANGUL SYLLABLE HILM", 0x31, "Hangul"),
    c(0xD793, None, "HANGUL SYLLABLE HILB", 0x31, "Hangul"),
    c(0xD794, None, "HANGUL SYLLABLE HILS", 0x31, "Hangul"),
    c(0xD795, None, "HANGUL SYLLABLE HILT", 0x31, "Hangul"),
    c(0xD796, None, "HANGUL SYLLABLE HILP", 0x31, "Hangul"),
    c(0xD797, None, "HANGUL SYLLABLE HILH", 0x31, "Hangul"),
    c(0xD798, None, "HANGUL SYLLABLE HIM", 0x31, "Hangul"),
    c(0xD799, None, "HANGUL SYLLABLE HIB", 0x31, "Hangul"),
    c(0xD79A, None, "HANGUL SYLLABLE HIBS", 0x31, "Hangul"),
    c(0xD79B, None, "HANGUL SYLLABLE HIS", 0x31, "Hangul"),
    c(0xD79C, None, "HANGUL SYLLABLE HISS", 0x31, "Hangul"),
    c(0xD79D, None, "HANGUL SYLLABLE HING", 0x31, "Hangul"),
    c(0xD79E, None, "HANGUL SYLLABLE HIJ", 0x31, "Hangul"),
    c(0xD79F, None, "HANGUL SYLLABLE HIC", 0x31, "Hangul"),
    c(0xD7A0, None, "HANGUL SYLLABLE HIK", 0x31, "Hangul"),
    c(0xD7A1, None, "HANGUL SYLLABLE HIT", 0x31, "Hangul"),
    c(0xD7A2, None, "HANGUL SYLLABLE HIP", 0x31, "Hangul"),
    c(0xD7A3, None, "HANGUL SYLLABLE HIH", 0x31, "Hangul"),
    c(0xD7B0, None, "HANGUL JUNGSEONG O-YEO", 0x31, "Jamo_Ext_B"),
    c(0xD7B1, None, "HANGUL JUNGSEONG O-O-I", 0x31, "Jamo_Ext_B"),
    c(0xD7B2, None, "HANGUL JUNGSEONG YO-A", 0x31, "Jamo_Ext_B"),
    c(0xD7B3, None, "HANGUL JUNGSEONG YO-AE", 0x31, "Jamo_Ext_B"),
    c(0xD7B4, None, "HANGUL JUNGSEONG YO-EO", 0x31, "Jamo_Ext_B"),
    c(0xD7B5, None, "HANGUL JUNGSEONG U-YEO", 0x31, "Jamo_Ext_B"),
    c(0xD7B6, None, "HANGUL JUNGSEONG U-I-I", 0x31, "Jamo_Ext_B"),
    c(0xD7B7, None, "HANGUL JUNGSEONG YU-AE", 0x31, "Jamo_Ext_B"),
    c(0xD7B8, None, "HANGUL JUNGSEONG YU-O", 0x31, "Jamo_Ext_B"),
    c(0xD7B9, None, "HANGUL JUNGSEONG EU-A", 0x31, "Jamo_Ext_B"),
    c(0xD7BA, None, "HANGUL JUNGSEONG EU-EO", 0x31, "Jamo_Ext_B"),
    c(0xD7BB, None, "HANGUL JUNGSEONG EU-E", 0x31, "Jamo_Ext_B"),
    c(0xD7BC, None, "HANGUL JUNGSEONG EU-O", 0x31, "Jamo_Ext_B"),
    c(0xD7BD, None, "HANGUL JUNGSEONG I-YA-O", 0x31, "Jamo_Ext_B"),
    c(0xD7BE, None, "HANGUL JUNGSEONG I-YAE", 0x31, "Jamo_Ext_B"),
    c(0xD7BF, None, "HANGUL JUNGSEONG I-YEO", 0x31, "Jamo_Ext_B"),
    c(0xD7C0, None, "HANGUL JUNGSEONG I-YE", 0x31, "Jamo_Ext_B"),
    c(0xD7C1, None, "HANGUL JUNGSEONG I-O-I", 0x31, "Jamo_Ext_B"),
    c(0xD7C2, None, "HANGUL JUNGSEONG I-YO", 0x31, "Jamo_Ext_B"),
    c(0xD7C3, None, "HANGUL JUNGSEONG I-YU", 0x31, "Jamo_Ext_B"),
    c(0xD7C4, None, "HANGUL JUNGSEONG I-I", 0x31, "Jamo_Ext_B"),
    c(0xD7C5, None, "HANGUL JUNGSEONG ARAEA-A", 0x31, "Jamo_Ext_B"),
    c(0xD7C6, None, "HANGUL JUNGSEONG ARAEA-E", 0x31, "Jamo_Ext_B"),
    c(0xD7CB, None, "HANGUL JONGSEONG NIEUN-RIEUL", 0x31, "Jamo_Ext_B"),
    c(0xD7CC, None, "HANGUL JONGSEONG NIEUN-CHIEUCH", 0x31, "Jamo_Ext_B"),
    c(0xD7CD, None, "HANGUL JONGSEONG SSANGTIKEUT", 0x31, "Jamo_Ext_B"),
    c(0xD7CE, None, "HANGUL JONGSEONG SSANGTIKEUT-PIEUP", 0x31, "Jamo_Ext_B"),
    c(0xD7CF, None, "HANGUL JONGSEONG TIKEUT-PIEUP", 0x31, "Jamo_Ext_B"),
    c(0xD7D0, None, "HANGUL JONGSEONG TIKEUT-SIOS", 0x31, "Jamo_Ext_B"),
    c(0xD7D1, None, "HANGUL JONGSEONG TIKEUT-SIOS-KIYEOK", 0x31, "Jamo_Ext_B"),
    c(0xD7D2, None, "HANGUL JONGSEONG TIKEUT-CIEUC", 0x31, "Jamo_Ext_B"),
    c(0xD7D3, None, "HANGUL JONGSEONG TIKEUT-CHIEUCH", 0x31, "Jamo_Ext_B"),
    c(0xD7D4, None, "HANGUL JONGSEONG TIKEUT-THIEUTH", 0x31, "Jamo_Ext_B"),
    c(0xD7D5, None, "HANGUL JONGSEONG RIEUL-SSANGKIYEOK", 0x31, "Jamo_Ext_B"),
    c(0xD7D6, None, "HANGUL JONGSEONG RIEUL-KIYEOK-HIEUH", 0x31, "Jamo_Ext_B"),
    c(0xD7D7, None, "HANGUL JONGSEONG SSANGRIEUL-KHIEUKH", 0x31, "Jamo_Ext_B"),
    c(0xD7D8, None, "HANGUL JONGSEONG RIEUL-MIEUM-HIEUH", 0x31, "Jamo_Ext_B"),
    c(0xD7D9, None, "HANGUL JONGSEONG RIEUL-PIEUP-TIKEUT", 0x31, "Jamo_Ext_B"),
    c(0xD7DA, None, "HANGUL JONGSEONG RIEUL-PIEUP-PHIEUPH", 0x31, "Jamo_Ext_B"),
    c(0xD7DB, None, "HANGUL JONGSEONG RIEUL-YESIEUNG", 0x31, "Jamo_Ext_B"),
    c(0xD7DC, None, "HANGUL JONGSEONG RIEUL-YEORINHIEUH-HIEUH", 0x31, "Jamo_Ext_B"),
    c(0xD7DD, None, "HANGUL JONGSEONG KAPYEOUNRIEUL", 0x31, "Jamo_Ext_B"),
    c(0xD7DE, None, "HANGUL JONGSEONG MIEUM-NIEUN", 0x31, "Jamo_Ext_B"),
    c(0xD7DF, None, "HANGUL JONGSEONG MIEUM-SSANGNIEUN", 0x31, "Jamo_Ext_B"),
    c(0xD7E0, None, "HANGUL JONGSEONG SSANGMIEUM", 0x31, "Jamo_Ext_B"),
    c(0xD7E1, None, "HANGUL JONGSEONG MIEUM-PIEUP-SIOS", 0x31, "Jamo_Ext_B"),
    c(0xD7E2, None, "HANGUL JONGSEONG MIEUM-CIEUC", 0x31, "Jamo_Ext_B"),
    c(0xD7E3, None, "HANGUL JONGSEONG PIEUP-TIKEUT", 0x31, "Jamo_Ext_B"),
    c(0xD7E4, None, "HANGUL JONGSEONG PIEUP-RIEUL-PHIEUPH", 0x31, "Jamo_Ext_B"),
    c(0xD7E5, None, "HANGUL JONGSEONG PIEUP-MIEUM", 0x31, "Jamo_Ext_B"),
    c(0xD7E6, None, "HANGUL JONGSEONG SSANGPIEUP", 0x31, "Jamo_Ext_B"),
    c(0xD7E7, None, "HANGUL JONGSEONG PIEUP-SIOS-TIKEUT", 0x31, "Jamo_Ext_B"),
    c(0xD7E8, None, "HANGUL JONGSEONG PIEUP-CIEUC", 0x31, "Jamo_Ext_B"),
    c(0xD7E9, None, "HANGUL JONGSEONG PIEUP-CHIEUCH", 0x31, "Jamo_Ext_B"),
    c(0xD7EA, None, "HANGUL JONGSEONG SIOS-MIEUM", 0x31, "Jamo_Ext_B"),
    c(0xD7EB, None, "HANGUL JONGSEONG SIOS-KAPYEOUNPIEUP", 0x31, "Jamo_Ext_B"),
    c(0xD7EC, None, "HANGUL JONGSEONG SSANGSIOS-KIYEOK", 0x31, "Jamo_Ext_B"),
    c(0xD7ED, None, "HANGUL JONGSEONG SSANGSIOS-TIKEUT", 0x31, "Jamo_Ext_B"),
    c(0xD7EE, None, "HANGUL JONGSEONG SIOS-PANSIOS", 0x31, "Jamo_Ext_B"),
    c(0xD7EF, None, "HANGUL JONGSEONG SIOS-CIEUC", 0x31, "Jamo_Ext_B"),
    c(0xD7F0, None, "HANGUL JONGSEONG SIOS-CHIEUCH", 0x31, "Jamo_Ext_B"),
    c(0xD7F1, None, "HANGUL JONGSEONG SIOS-THIEUTH", 0x31, "Jamo_Ext_B"),
    c(0xD7F2, None, "HANGUL JONGSEONG SIOS-HIEUH", 0x31, "Jamo_Ext_B"),
    c(0xD7F3, None, "HANGUL JONGSEONG PANSIOS-PIEUP", 0x31, "Jamo_Ext_B"),
    c(0xD7F4, None, "HANGUL JONGSEONG PANSIOS-KAPYEOUNPIEUP", 0x31, "Jamo_Ext_B"),
    c(0xD7F5, None, "HANGUL JONGSEONG YESIEUNG-MIEUM", 0x31, "Jamo_Ext_B"),
    c(0xD7F6, None, "HANGUL JONGSEONG YESIEUNG-HIEUH", 0x31, "Jamo_Ext_B"),
    c(0xD7F7, None, "HANGUL JONGSEONG CIEUC-PIEUP", 0x31, "Jamo_Ext_B"),
    c(0xD7F8, None, "HANGUL JONGSEONG CIEUC-SSANGPIEUP", 0x31, "Jamo_Ext_B"),
    c(0xD7F9, None, "HANGUL JONGSEONG SSANGCIEUC", 0x31, "Jamo_Ext_B"),
    c(0xD7FA, None, "HANGUL JONGSEONG PHIEUPH-SIOS", 0x31, "Jamo_Ext_B"),
    c(0xD7FB, None, "HANGUL JONGSEONG PHIEUPH-THIEUTH", 0x31, "Jamo_Ext_B"),
    c(0xE000, Some(0xF8FF), "", 0x00, "PUA"),
    c(0xF900, Some(0xFA6D), "CJK COMPATIBILITY IDEOGRAPH-#", 0x31, "CJK_Compat_Ideographs"),
    c(0xFA70, Some(0xFAD9), "CJK COMPATIBILITY IDEOGRAPH-#", 0x31, "CJK_Compat_Ideographs"),
    c(0xFB00, None, "LATIN SMALL LIGATURE FF", 0x31, "Alphabetic_PF"),
    c(0xFB01, None, "LATIN SMALL LIGATURE FI", 0x31, "Alphabetic_PF"),
    c(0xFB02, None, "LATIN SMALL LIGATURE FL", 0x31, "Alphabetic_PF"),
    c(0xFB03, None, "LATIN SMALL LIGATURE FFI", 0x31, "Alphabetic_PF"),
    c(0xFB04, None, "LATIN SMALL LIGATURE FFL", 0x31, "Alphabetic_PF"),
    c(0xFB05, None, "LATIN SMALL LIGATURE LONG S T", 0x31, "Alphabetic_PF"),
    c(0xFB06, None, "LATIN SMALL LIGATURE ST", 0x31, "Alphabetic_PF"),
    c(0xFB13, None, "ARMENIAN SMALL LIGATURE MEN NOW", 0x31, "Alphabetic_PF"),
    c(0xFB14, None, "ARMENIAN SMALL LIGATURE MEN ECH", 0x31, "Alphabetic_PF"),
    c(0xFB15, None, "ARMENIAN SMALL LIGATURE MEN INI", 0x31, "Alphabetic_PF"),
    c(0xFB16, None, "ARMENIAN SMALL LIGATURE VEW NOW", 0x31, "Alphabetic_PF"),
    c(0xFB17, None, "ARMENIAN SMALL LIGATURE MEN XEH", 0x31, "Alphabetic_PF"),
    c(0xFB1D, None, "HEBREW LETTER YOD WITH HIRIQ", 0x31, "Alphabetic_PF"),
    c(0xFB1E, None, "HEBREW POINT JUDEO-SPANISH VARIKA", 0x21, "Alphabetic_PF"),
    c(0xFB1F, None, "HEBREW LIGATURE YIDDISH YOD YOD PATAH", 0x31, "Alphabetic_PF"),
    c(0xFB20, None, "HEBREW LETTER ALTERNATIVE AYIN", 0x31, "Alphabetic_PF"),
    c(0xFB21, None, "HEBREW LETTER WIDE ALEF", 0x31, "Alphabetic_PF"),
    c(0xFB22, None, "HEBREW LETTER WIDE DALET", 0x31, "Alphabetic_PF"),
    c(0xFB23, None, "HEBREW LETTER WIDE HE", 0x31, "Alphabetic_PF"),
    c(0xFB24, None, "HEBREW LETTER WIDE KAF", 0x31, "Alphabetic_PF"),
    c(0xFB25, None, "HEBREW LETTER WIDE LAMED", 0x31, "Alphabetic_PF"),
    c(0xFB26, None, "HEBREW LETTER WIDE FINAL MEM", 0x31, "Alphabetic_PF"),
    c(0xFB27, None, "HEBREW LETTER WIDE RESH", 0x31, "Alphabetic_PF"),
    c(0xFB28, None, "HEBREW LETTER WIDE TAV", 0x31, "Alphabetic_PF"),
    c(0xFB29, None, "HEBREW LETTER ALTERNATIVE PLUS SIGN", 0x02, "Alphabetic_PF"),
    c(0xFB2A, None, "HEBREW LETTER SHIN WITH SHIN DOT", 0x31, "Alphabetic_PF"),
    c(0xFB2B, None, "HEBREW LETTER SHIN WITH SIN DOT", 0x31, "Alphabetic_PF"),
    c(0xFB2C, None, "HEBREW LETTER SHIN WITH DAGESH AND SHIN DOT", 0x31, "Alphabetic_PF"),
    c(0xFB2D, None, "HEBREW LETTER SHIN WITH DAGESH AND SIN DOT", 0x31, "Alphabetic_PF"),
    c(0xFB2E, None, "HEBREW LETTER ALEF WITH PATAH", 0x31, "Alphabetic_PF"),
    c(0xFB2F, None, "HEBREW LETTER ALEF WITH QAMATS", 0x31, "Alphabetic_PF"),
    c(0xFB30, None, "HEBREW LETTER ALEF WITH MAPIQ", 0x31, "Alphabetic_PF"),
    c(0xFB31, None, "HEBREW LETTER BET WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB32, None, "HEBREW LETTER GIMEL WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB33, None, "HEBREW LETTER DALET WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB34, None, "HEBREW LETTER HE WITH MAPIQ", 0x31, "Alphabetic_PF"),
    c(0xFB35, None, "HEBREW LETTER VAV WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB36, None, "HEBREW LETTER ZAYIN WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB38, None, "HEBREW LETTER TET WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB39, None, "HEBREW LETTER YOD WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB3A, None, "HEBREW LETTER FINAL KAF WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB3B, None, "HEBREW LETTER KAF WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB3C, None, "HEBREW LETTER LAMED WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB3E, None, "HEBREW LETTER MEM WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB40, None, "HEBREW LETTER NUN WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB41, None, "HEBREW LETTER SAMEKH WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB43, None, "HEBREW LETTER FINAL PE WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB44, None, "HEBREW LETTER PE WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB46, None, "HEBREW LETTER TSADI WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB47, None, "HEBREW LETTER QOF WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB48, None, "HEBREW LETTER RESH WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB49, None, "HEBREW LETTER SHIN WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB4A, None, "HEBREW LETTER TAV WITH DAGESH", 0x31, "Alphabetic_PF"),
    c(0xFB4B, None, "HEBREW LETTER VAV WITH HOLAM", 0x31, "Alphabetic_PF"),
    c(0xFB4C, None, "HEBREW LETTER BET WITH RAFE", 0x31, "Alphabetic_PF"),
    c(0xFB4D, None, "HEBREW LETTER KAF WITH RAFE", 0x31, "Alphabetic_PF"),
    c(0xFB4E, None, "HEBREW LETTER PE WITH RAFE", 0x31, "Alphabetic_PF"),
    c(0xFB4F, None, "HEBREW LIGATURE ALEF LAMED", 0x31, "Alphabetic_PF"),
    c(0xFB50, None, "ARABIC LETTER ALEF WASLA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB51, None, "ARABIC LETTER ALEF WASLA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB52, None, "ARABIC LETTER BEEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB53, None, "ARABIC LETTER BEEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB54, None, "ARABIC LETTER BEEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB55, None, "ARABIC LETTER BEEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB56, None, "ARABIC LETTER PEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB57, None, "ARABIC LETTER PEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB58, None, "ARABIC LETTER PEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB59, None, "ARABIC LETTER PEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB5A, None, "ARABIC LETTER BEHEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB5B, None, "ARABIC LETTER BEHEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB5C, None, "ARABIC LETTER BEHEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB5D, None, "ARABIC LETTER BEHEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB5E, None, "ARABIC LETTER TTEHEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB5F, None, "ARABIC LETTER TTEHEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB60, None, "ARABIC LETTER TTEHEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB61, None, "ARABIC LETTER TTEHEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB62, None, "ARABIC LETTER TEHEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB63, None, "ARABIC LETTER TEHEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB64, None, "ARABIC LETTER TEHEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB65, None, "ARABIC LETTER TEHEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB66, None, "ARABIC LETTER TTEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB67, None, "ARABIC LETTER TTEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB68, None, "ARABIC LETTER TTEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB69, None, "ARABIC LETTER TTEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB6A, None, "ARABIC LETTER VEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB6B, None, "ARABIC LETTER VEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB6C, None, "ARABIC LETTER VEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB6D, None, "ARABIC LETTER VEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB6E, None, "ARABIC LETTER PEHEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB6F, None, "ARABIC LETTER PEHEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB70, None, "ARABIC LETTER PEHEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB71, None, "ARABIC LETTER PEHEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB72, None, "ARABIC LETTER DYEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB73, None, "ARABIC LETTER DYEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB74, None, "ARABIC LETTER DYEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB75, None, "ARABIC LETTER DYEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB76, None, "ARABIC LETTER NYEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB77, None, "ARABIC LETTER NYEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB78, None, "ARABIC LETTER NYEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB79, None, "ARABIC LETTER NYEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB7A, None, "ARABIC LETTER TCHEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB7B, None, "ARABIC LETTER TCHEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB7C, None, "ARABIC LETTER TCHEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB7D, None, "ARABIC LETTER TCHEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB7E, None, "ARABIC LETTER TCHEHEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB7F, None, "ARABIC LETTER TCHEHEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB80, None, "ARABIC LETTER TCHEHEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB81, None, "ARABIC LETTER TCHEHEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB82, None, "ARABIC LETTER DDAHAL ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB83, None, "ARABIC LETTER DDAHAL FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB84, None, "ARABIC LETTER DAHAL ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB85, None, "ARABIC LETTER DAHAL FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB86, None, "ARABIC LETTER DUL ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB87, None, "ARABIC LETTER DUL FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB88, None, "ARABIC LETTER DDAL ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB89, None, "ARABIC LETTER DDAL FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB8A, None, "ARABIC LETTER JEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB8B, None, "ARABIC LETTER JEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB8C, None, "ARABIC LETTER RREH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB8D, None, "ARABIC LETTER RREH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB8E, None, "ARABIC LETTER KEHEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB8F, None, "ARABIC LETTER KEHEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB90, None, "ARABIC LETTER KEHEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB91, None, "ARABIC LETTER KEHEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB92, None, "ARABIC LETTER GAF ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB93, None, "ARABIC LETTER GAF FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB94, None, "ARABIC LETTER GAF INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB95, None, "ARABIC LETTER GAF MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB96, None, "ARABIC LETTER GUEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB97, None, "ARABIC LETTER GUEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB98, None, "ARABIC LETTER GUEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB99, None, "ARABIC LETTER GUEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB9A, None, "ARABIC LETTER NGOEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB9B, None, "ARABIC LETTER NGOEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB9C, None, "ARABIC LETTER NGOEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB9D, None, "ARABIC LETTER NGOEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFB9E, None, "ARABIC LETTER NOON GHUNNA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFB9F, None, "ARABIC LETTER NOON GHUNNA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBA0, None, "ARABIC LETTER RNOON ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBA1, None, "ARABIC LETTER RNOON FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBA2, None, "ARABIC LETTER RNOON INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBA3, None, "ARABIC LETTER RNOON MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBA4, None, "ARABIC LETTER HEH WITH YEH ABOVE ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBA5, None, "ARABIC LETTER HEH WITH YEH ABOVE FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBA6, None, "ARABIC LETTER HEH GOAL ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBA7, None, "ARABIC LETTER HEH GOAL FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBA8, None, "ARABIC LETTER HEH GOAL INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBA9, None, "ARABIC LETTER HEH GOAL MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBAA, None, "ARABIC LETTER HEH DOACHASHMEE ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBAB, None, "ARABIC LETTER HEH DOACHASHMEE FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBAC, None, "ARABIC LETTER HEH DOACHASHMEE INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBAD, None, "ARABIC LETTER HEH DOACHASHMEE MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBAE, None, "ARABIC LETTER YEH BARREE ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBAF, None, "ARABIC LETTER YEH BARREE FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBB0, None, "ARABIC LETTER YEH BARREE WITH HAMZA ABOVE ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBB1, None, "ARABIC LETTER YEH BARREE WITH HAMZA ABOVE FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBB2, None, "ARABIC SYMBOL DOT ABOVE", 0x00, "Arabic_PF_A"),
    c(0xFBB3, None, "ARABIC SYMBOL DOT BELOW", 0x00, "Arabic_PF_A"),
    c(0xFBB4, None, "ARABIC SYMBOL TWO DOTS ABOVE", 0x00, "Arabic_PF_A"),
    c(0xFBB5, None, "ARABIC SYMBOL TWO DOTS BELOW", 0x00, "Arabic_PF_A"),
    c(0xFBB6, None, "ARABIC SYMBOL THREE DOTS ABOVE", 0x00, "Arabic_PF_A"),
    c(0xFBB7, None, "ARABIC SYMBOL THREE DOTS BELOW", 0x00, "Arabic_PF_A"),
    c(0xFBB8, None, "ARABIC SYMBOL THREE DOTS POINTING DOWNWARDS ABOVE", 0x00, "Arabic_PF_A"),
    c(0xFBB9, None, "ARABIC SYMBOL THREE DOTS POINTING DOWNWARDS BELOW", 0x00, "Arabic_PF_A"),
    c(0xFBBA, None, "ARABIC SYMBOL FOUR DOTS ABOVE", 0x00, "Arabic_PF_A"),
    c(0xFBBB, None, "ARABIC SYMBOL FOUR DOTS BELOW", 0x00, "Arabic_PF_A"),
    c(0xFBBC, None, "ARABIC SYMBOL DOUBLE VERTICAL BAR BELOW", 0x00, "Arabic_PF_A"),
    c(0xFBBD, None, "ARABIC SYMBOL TWO DOTS VERTICALLY ABOVE", 0x00, "Arabic_PF_A"),
    c(0xFBBE, None, "ARABIC SYMBOL TWO DOTS VERTICALLY BELOW", 0x00, "Arabic_PF_A"),
    c(0xFBBF, None, "ARABIC SYMBOL RING", 0x00, "Arabic_PF_A"),
    c(0xFBC0, None, "ARABIC SYMBOL SMALL TAH ABOVE", 0x00, "Arabic_PF_A"),
    c(0xFBC1, None, "ARABIC SYMBOL SMALL TAH BELOW", 0x00, "Arabic_PF_A"),
    c(0xFBC2, None, "ARABIC SYMBOL WASLA ABOVE", 0x00, "Arabic_PF_A"),
    c(0xFBD3, None, "ARABIC LETTER NG ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBD4, None, "ARABIC LETTER NG FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBD5, None, "ARABIC LETTER NG INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBD6, None, "ARABIC LETTER NG MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBD7, None, "ARABIC LETTER U ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBD8, None, "ARABIC LETTER U FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBD9, None, "ARABIC LETTER OE ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBDA, None, "ARABIC LETTER OE FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBDB, None, "ARABIC LETTER YU ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBDC, None, "ARABIC LETTER YU FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBDD, None, "ARABIC LETTER U WITH HAMZA ABOVE ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBDE, None, "ARABIC LETTER VE ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBDF, None, "ARABIC LETTER VE FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBE0, None, "ARABIC LETTER KIRGHIZ OE ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBE1, None, "ARABIC LETTER KIRGHIZ OE FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBE2, None, "ARABIC LETTER KIRGHIZ YU ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBE3, None, "ARABIC LETTER KIRGHIZ YU FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBE4, None, "ARABIC LETTER E ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBE5, None, "ARABIC LETTER E FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBE6, None, "ARABIC LETTER E INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBE7, None, "ARABIC LETTER E MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBE8, None, "ARABIC LETTER UIGHUR KAZAKH KIRGHIZ ALEF MAKSURA INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBE9, None, "ARABIC LETTER UIGHUR KAZAKH KIRGHIZ ALEF MAKSURA MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBEA, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH ALEF ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBEB, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH ALEF FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBEC, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH AE ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBED, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH AE FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBEE, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH WAW ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBEF, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH WAW FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBF0, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH U ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBF1, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH U FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBF2, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH OE ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBF3, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH OE FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBF4, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH YU ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBF5, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH YU FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBF6, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH E ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBF7, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH E FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBF8, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH E INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBF9, None, "ARABIC LIGATURE UIGHUR KIRGHIZ YEH WITH HAMZA ABOVE WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBFA, None, "ARABIC LIGATURE UIGHUR KIRGHIZ YEH WITH HAMZA ABOVE WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBFB, None, "ARABIC LIGATURE UIGHUR KIRGHIZ YEH WITH HAMZA ABOVE WITH ALEF MAKSURA INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBFC, None, "ARABIC LETTER FARSI YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFBFD, None, "ARABIC LETTER FARSI YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBFE, None, "ARABIC LETTER FARSI YEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFBFF, None, "ARABIC LETTER FARSI YEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC00, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH JEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC01, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH HAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC02, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC03, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC04, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC05, None, "ARABIC LIGATURE BEH WITH JEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC06, None, "ARABIC LIGATURE BEH WITH HAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC07, None, "ARABIC LIGATURE BEH WITH KHAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC08, None, "ARABIC LIGATURE BEH WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC09, None, "ARABIC LIGATURE BEH WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC0A, None, "ARABIC LIGATURE BEH WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC0B, None, "ARABIC LIGATURE TEH WITH JEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC0C, None, "ARABIC LIGATURE TEH WITH HAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC0D, None, "ARABIC LIGATURE TEH WITH KHAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC0E, None, "ARABIC LIGATURE TEH WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC0F, None, "ARABIC LIGATURE TEH WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC10, None, "ARABIC LIGATURE TEH WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC11, None, "ARABIC LIGATURE THEH WITH JEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC12, None, "ARABIC LIGATURE THEH WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC13, None, "ARABIC LIGATURE THEH WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC14, None, "ARABIC LIGATURE THEH WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC15, None, "ARABIC LIGATURE JEEM WITH HAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC16, None, "ARABIC LIGATURE JEEM WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC17, None, "ARABIC LIGATURE HAH WITH JEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC18, None, "ARABIC LIGATURE HAH WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC19, None, "ARABIC LIGATURE KHAH WITH JEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC1A, None, "ARABIC LIGATURE KHAH WITH HAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC1B, None, "ARABIC LIGATURE KHAH WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC1C, None, "ARABIC LIGATURE SEEN WITH JEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC1D, None, "ARABIC LIGATURE SEEN WITH HAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC1E, None, "ARABIC LIGATURE SEEN WITH KHAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC1F, None, "ARABIC LIGATURE SEEN WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC20, None, "ARABIC LIGATURE SAD WITH HAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC21, None, "ARABIC LIGATURE SAD WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC22, None, "ARABIC LIGATURE DAD WITH JEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC23, None, "ARABIC LIGATURE DAD WITH HAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC24, None, "ARABIC LIGATURE DAD WITH KHAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC25, None, "ARABIC LIGATURE DAD WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC26, None, "ARABIC LIGATURE TAH WITH HAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC27, None, "ARABIC LIGATURE TAH WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC28, None, "ARABIC LIGATURE ZAH WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC29, None, "ARABIC LIGATURE AIN WITH JEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC2A, None, "ARABIC LIGATURE AIN WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC2B, None, "ARABIC LIGATURE GHAIN WITH JEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC2C, None, "ARABIC LIGATURE GHAIN WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC2D, None, "ARABIC LIGATURE FEH WITH JEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC2E, None, "ARABIC LIGATURE FEH WITH HAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC2F, None, "ARABIC LIGATURE FEH WITH KHAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC30, None, "ARABIC LIGATURE FEH WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC31, None, "ARABIC LIGATURE FEH WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC32, None, "ARABIC LIGATURE FEH WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC33, None, "ARABIC LIGATURE QAF WITH HAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC34, None, "ARABIC LIGATURE QAF WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC35, None, "ARABIC LIGATURE QAF WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC36, None, "ARABIC LIGATURE QAF WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC37, None, "ARABIC LIGATURE KAF WITH ALEF ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC38, None, "ARABIC LIGATURE KAF WITH JEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC39, None, "ARABIC LIGATURE KAF WITH HAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC3A, None, "ARABIC LIGATURE KAF WITH KHAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC3B, None, "ARABIC LIGATURE KAF WITH LAM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC3C, None, "ARABIC LIGATURE KAF WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC3D, None, "ARABIC LIGATURE KAF WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC3E, None, "ARABIC LIGATURE KAF WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC3F, None, "ARABIC LIGATURE LAM WITH JEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC40, None, "ARABIC LIGATURE LAM WITH HAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC41, None, "ARABIC LIGATURE LAM WITH KHAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC42, None, "ARABIC LIGATURE LAM WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC43, None, "ARABIC LIGATURE LAM WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC44, None, "ARABIC LIGATURE LAM WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC45, None, "ARABIC LIGATURE MEEM WITH JEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC46, None, "ARABIC LIGATURE MEEM WITH HAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC47, None, "ARABIC LIGATURE MEEM WITH KHAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC48, None, "ARABIC LIGATURE MEEM WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC49, None, "ARABIC LIGATURE MEEM WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC4A, None, "ARABIC LIGATURE MEEM WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC4B, None, "ARABIC LIGATURE NOON WITH JEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC4C, None, "ARABIC LIGATURE NOON WITH HAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC4D, None, "ARABIC LIGATURE NOON WITH KHAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC4E, None, "ARABIC LIGATURE NOON WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC4F, None, "ARABIC LIGATURE NOON WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC50, None, "ARABIC LIGATURE NOON WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC51, None, "ARABIC LIGATURE HEH WITH JEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC52, None, "ARABIC LIGATURE HEH WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC53, None, "ARABIC LIGATURE HEH WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC54, None, "ARABIC LIGATURE HEH WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC55, None, "ARABIC LIGATURE YEH WITH JEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC56, None, "ARABIC LIGATURE YEH WITH HAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC57, None, "ARABIC LIGATURE YEH WITH KHAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC58, None, "ARABIC LIGATURE YEH WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC59, None, "ARABIC LIGATURE YEH WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC5A, None, "ARABIC LIGATURE YEH WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC5B, None, "ARABIC LIGATURE THAL WITH SUPERSCRIPT ALEF ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC5C, None, "ARABIC LIGATURE REH WITH SUPERSCRIPT ALEF ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC5D, None, "ARABIC LIGATURE ALEF MAKSURA WITH SUPERSCRIPT ALEF ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFC5E, None, "ARABIC LIGATURE SHADDA WITH DAMMATAN ISOLATED FORM", 0x01, "Arabic_PF_A"),
    c(0xFC5F, None, "ARABIC LIGATURE SHADDA WITH KASRATAN ISOLATED FORM", 0x01, "Arabic_PF_A"),
    c(0xFC60, None, "ARABIC LIGATURE SHADDA WITH FATHA ISOLATED FORM", 0x01, "Arabic_PF_A"),
    c(0xFC61, None, "ARABIC LIGATURE SHADDA WITH DAMMA ISOLATED FORM", 0x01, "Arabic_PF_A"),
    c(0xFC62, None, "ARABIC LIGATURE SHADDA WITH KASRA ISOLATED FORM", 0x01, "Arabic_PF_A"),
    c(0xFC63, None, "ARABIC LIGATURE SHADDA WITH SUPERSCRIPT ALEF ISOLATED FORM", 0x01, "Arabic_PF_A"),
    c(0xFC64, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH REH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC65, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH ZAIN FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC66, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC67, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH NOON FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC68, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC69, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC6A, None, "ARABIC LIGATURE BEH WITH REH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC6B, None, "ARABIC LIGATURE BEH WITH ZAIN FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC6C, None, "ARABIC LIGATURE BEH WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC6D, None, "ARABIC LIGATURE BEH WITH NOON FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC6E, None, "ARABIC LIGATURE BEH WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC6F, None, "ARABIC LIGATURE BEH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC70, None, "ARABIC LIGATURE TEH WITH REH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC71, None, "ARABIC LIGATURE TEH WITH ZAIN FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC72, None, "ARABIC LIGATURE TEH WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC73, None, "ARABIC LIGATURE TEH WITH NOON FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC74, None, "ARABIC LIGATURE TEH WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC75, None, "ARABIC LIGATURE TEH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC76, None, "ARABIC LIGATURE THEH WITH REH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC77, None, "ARABIC LIGATURE THEH WITH ZAIN FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC78, None, "ARABIC LIGATURE THEH WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC79, None, "ARABIC LIGATURE THEH WITH NOON FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC7A, None, "ARABIC LIGATURE THEH WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC7B, None, "ARABIC LIGATURE THEH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC7C, None, "ARABIC LIGATURE FEH WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC7D, None, "ARABIC LIGATURE FEH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC7E, None, "ARABIC LIGATURE QAF WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC7F, None, "ARABIC LIGATURE QAF WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC80, None, "ARABIC LIGATURE KAF WITH ALEF FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC81, None, "ARABIC LIGATURE KAF WITH LAM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC82, None, "ARABIC LIGATURE KAF WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC83, None, "ARABIC LIGATURE KAF WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC84, None, "ARABIC LIGATURE KAF WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC85, None, "ARABIC LIGATURE LAM WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC86, None, "ARABIC LIGATURE LAM WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC87, None, "ARABIC LIGATURE LAM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC88, None, "ARABIC LIGATURE MEEM WITH ALEF FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC89, None, "ARABIC LIGATURE MEEM WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC8A, None, "ARABIC LIGATURE NOON WITH REH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC8B, None, "ARABIC LIGATURE NOON WITH ZAIN FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC8C, None, "ARABIC LIGATURE NOON WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC8D, None, "ARABIC LIGATURE NOON WITH NOON FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC8E, None, "ARABIC LIGATURE NOON WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC8F, None, "ARABIC LIGATURE NOON WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC90, None, "ARABIC LIGATURE ALEF MAKSURA WITH SUPERSCRIPT ALEF FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC91, None, "ARABIC LIGATURE YEH WITH REH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC92, None, "ARABIC LIGATURE YEH WITH ZAIN FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC93, None, "ARABIC LIGATURE YEH WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC94, None, "ARABIC LIGATURE YEH WITH NOON FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC95, None, "ARABIC LIGATURE YEH WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC96, None, "ARABIC LIGATURE YEH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC97, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC98, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC99, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH KHAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC9A, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC9B, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH HEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC9C, None, "ARABIC LIGATURE BEH WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC9D, None, "ARABIC LIGATURE BEH WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC9E, None, "ARABIC LIGATURE BEH WITH KHAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFC9F, None, "ARABIC LIGATURE BEH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCA0, None, "ARABIC LIGATURE BEH WITH HEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCA1, None, "ARABIC LIGATURE TEH WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCA2, None, "ARABIC LIGATURE TEH WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCA3, None, "ARABIC LIGATURE TEH WITH KHAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCA4, None, "ARABIC LIGATURE TEH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCA5, None, "ARABIC LIGATURE TEH WITH HEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCA6, None, "ARABIC LIGATURE THEH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCA7, None, "ARABIC LIGATURE JEEM WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCA8, None, "ARABIC LIGATURE JEEM WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCA9, None, "ARABIC LIGATURE HAH WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCAA, None, "ARABIC LIGATURE HAH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCAB, None, "ARABIC LIGATURE KHAH WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCAC, None, "ARABIC LIGATURE KHAH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCAD, None, "ARABIC LIGATURE SEEN WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCAE, None, "ARABIC LIGATURE SEEN WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCAF, None, "ARABIC LIGATURE SEEN WITH KHAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCB0, None, "ARABIC LIGATURE SEEN WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCB1, None, "ARABIC LIGATURE SAD WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCB2, None, "ARABIC LIGATURE SAD WITH KHAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCB3, None, "ARABIC LIGATURE SAD WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCB4, None, "ARABIC LIGATURE DAD WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCB5, None, "ARABIC LIGATURE DAD WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCB6, None, "ARABIC LIGATURE DAD WITH KHAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCB7, None, "ARABIC LIGATURE DAD WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCB8, None, "ARABIC LIGATURE TAH WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCB9, None, "ARABIC LIGATURE ZAH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCBA, None, "ARABIC LIGATURE AIN WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCBB, None, "ARABIC LIGATURE AIN WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCBC, None, "ARABIC LIGATURE GHAIN WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCBD, None, "ARABIC LIGATURE GHAIN WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCBE, None, "ARABIC LIGATURE FEH WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCBF, None, "ARABIC LIGATURE FEH WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCC0, None, "ARABIC LIGATURE FEH WITH KHAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCC1, None, "ARABIC LIGATURE FEH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCC2, None, "ARABIC LIGATURE QAF WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCC3, None, "ARABIC LIGATURE QAF WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCC4, None, "ARABIC LIGATURE KAF WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCC5, None, "ARABIC LIGATURE KAF WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCC6, None, "ARABIC LIGATURE KAF WITH KHAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCC7, None, "ARABIC LIGATURE KAF WITH LAM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCC8, None, "ARABIC LIGATURE KAF WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCC9, None, "ARABIC LIGATURE LAM WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCCA, None, "ARABIC LIGATURE LAM WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCCB, None, "ARABIC LIGATURE LAM WITH KHAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCCC, None, "ARABIC LIGATURE LAM WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCCD, None, "ARABIC LIGATURE LAM WITH HEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCCE, None, "ARABIC LIGATURE MEEM WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCCF, None, "ARABIC LIGATURE MEEM WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCD0, None, "ARABIC LIGATURE MEEM WITH KHAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCD1, None, "ARABIC LIGATURE MEEM WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCD2, None, "ARABIC LIGATURE NOON WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCD3, None, "ARABIC LIGATURE NOON WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCD4, None, "ARABIC LIGATURE NOON WITH KHAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCD5, None, "ARABIC LIGATURE NOON WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCD6, None, "ARABIC LIGATURE NOON WITH HEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCD7, None, "ARABIC LIGATURE HEH WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCD8, None, "ARABIC LIGATURE HEH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCD9, None, "ARABIC LIGATURE HEH WITH SUPERSCRIPT ALEF INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCDA, None, "ARABIC LIGATURE YEH WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCDB, None, "ARABIC LIGATURE YEH WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCDC, None, "ARABIC LIGATURE YEH WITH KHAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCDD, None, "ARABIC LIGATURE YEH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCDE, None, "ARABIC LIGATURE YEH WITH HEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCDF, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH MEEM MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCE0, None, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH HEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCE1, None, "ARABIC LIGATURE BEH WITH MEEM MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCE2, None, "ARABIC LIGATURE BEH WITH HEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCE3, None, "ARABIC LIGATURE TEH WITH MEEM MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCE4, None, "ARABIC LIGATURE TEH WITH HEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCE5, None, "ARABIC LIGATURE THEH WITH MEEM MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCE6, None, "ARABIC LIGATURE THEH WITH HEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCE7, None, "ARABIC LIGATURE SEEN WITH MEEM MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCE8, None, "ARABIC LIGATURE SEEN WITH HEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCE9, None, "ARABIC LIGATURE SHEEN WITH MEEM MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCEA, None, "ARABIC LIGATURE SHEEN WITH HEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCEB, None, "ARABIC LIGATURE KAF WITH LAM MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCEC, None, "ARABIC LIGATURE KAF WITH MEEM MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCED, None, "ARABIC LIGATURE LAM WITH MEEM MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCEE, None, "ARABIC LIGATURE NOON WITH MEEM MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCEF, None, "ARABIC LIGATURE NOON WITH HEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCF0, None, "ARABIC LIGATURE YEH WITH MEEM MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCF1, None, "ARABIC LIGATURE YEH WITH HEH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCF2, None, "ARABIC LIGATURE SHADDA WITH FATHA MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCF3, None, "ARABIC LIGATURE SHADDA WITH DAMMA MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCF4, None, "ARABIC LIGATURE SHADDA WITH KASRA MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFCF5, None, "ARABIC LIGATURE TAH WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFCF6, None, "ARABIC LIGATURE TAH WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFCF7, None, "ARABIC LIGATURE AIN WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFCF8, None, "ARABIC LIGATURE AIN WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFCF9, None, "ARABIC LIGATURE GHAIN WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFCFA, None, "ARABIC LIGATURE GHAIN WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFCFB, None, "ARABIC LIGATURE SEEN WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFCFC, None, "ARABIC LIGATURE SEEN WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFCFD, None, "ARABIC LIGATURE SHEEN WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFCFE, None, "ARABIC LIGATURE SHEEN WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFCFF, None, "ARABIC LIGATURE HAH WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFD00, None, "ARABIC LIGATURE HAH WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFD01, None, "ARABIC LIGATURE JEEM WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFD02, None, "ARABIC LIGATURE JEEM WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFD03, None, "ARABIC LIGATURE KHAH WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFD04, None, "ARABIC LIGATURE KHAH WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFD05, None, "ARABIC LIGATURE SAD WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFD06, None, "ARABIC LIGATURE SAD WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFD07, None, "ARABIC LIGATURE DAD WITH ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFD08, None, "ARABIC LIGATURE DAD WITH YEH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFD09, None, "ARABIC LIGATURE SHEEN WITH JEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFD0A, None, "ARABIC LIGATURE SHEEN WITH HAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFD0B, None, "ARABIC LIGATURE SHEEN WITH KHAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFD0C, None, "ARABIC LIGATURE SHEEN WITH MEEM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFD0D, None, "ARABIC LIGATURE SHEEN WITH REH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFD0E, None, "ARABIC LIGATURE SEEN WITH REH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFD0F, None, "ARABIC LIGATURE SAD WITH REH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFD10, None, "ARABIC LIGATURE DAD WITH REH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFD11, None, "ARABIC LIGATURE TAH WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD12, None, "ARABIC LIGATURE TAH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD13, None, "ARABIC LIGATURE AIN WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD14, None, "ARABIC LIGATURE AIN WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD15, None, "ARABIC LIGATURE GHAIN WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD16, None, "ARABIC LIGATURE GHAIN WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD17, None, "ARABIC LIGATURE SEEN WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD18, None, "ARABIC LIGATURE SEEN WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD19, None, "ARABIC LIGATURE SHEEN WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD1A, None, "ARABIC LIGATURE SHEEN WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD1B, None, "ARABIC LIGATURE HAH WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD1C, None, "ARABIC LIGATURE HAH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD1D, None, "ARABIC LIGATURE JEEM WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD1E, None, "ARABIC LIGATURE JEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD1F, None, "ARABIC LIGATURE KHAH WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD20, None, "ARABIC LIGATURE KHAH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD21, None, "ARABIC LIGATURE SAD WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD22, None, "ARABIC LIGATURE SAD WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD23, None, "ARABIC LIGATURE DAD WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD24, None, "ARABIC LIGATURE DAD WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD25, None, "ARABIC LIGATURE SHEEN WITH JEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD26, None, "ARABIC LIGATURE SHEEN WITH HAH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD27, None, "ARABIC LIGATURE SHEEN WITH KHAH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD28, None, "ARABIC LIGATURE SHEEN WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD29, None, "ARABIC LIGATURE SHEEN WITH REH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD2A, None, "ARABIC LIGATURE SEEN WITH REH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD2B, None, "ARABIC LIGATURE SAD WITH REH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD2C, None, "ARABIC LIGATURE DAD WITH REH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD2D, None, "ARABIC LIGATURE SHEEN WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD2E, None, "ARABIC LIGATURE SHEEN WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD2F, None, "ARABIC LIGATURE SHEEN WITH KHAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD30, None, "ARABIC LIGATURE SHEEN WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD31, None, "ARABIC LIGATURE SEEN WITH HEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD32, None, "ARABIC LIGATURE SHEEN WITH HEH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD33, None, "ARABIC LIGATURE TAH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD34, None, "ARABIC LIGATURE SEEN WITH JEEM MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD35, None, "ARABIC LIGATURE SEEN WITH HAH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD36, None, "ARABIC LIGATURE SEEN WITH KHAH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD37, None, "ARABIC LIGATURE SHEEN WITH JEEM MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD38, None, "ARABIC LIGATURE SHEEN WITH HAH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD39, None, "ARABIC LIGATURE SHEEN WITH KHAH MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD3A, None, "ARABIC LIGATURE TAH WITH MEEM MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD3B, None, "ARABIC LIGATURE ZAH WITH MEEM MEDIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD3C, None, "ARABIC LIGATURE ALEF WITH FATHATAN FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD3D, None, "ARABIC LIGATURE ALEF WITH FATHATAN ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFD3E, None, "ORNATE LEFT PARENTHESIS", 0x00, "Arabic_PF_A"),
    c(0xFD3F, None, "ORNATE RIGHT PARENTHESIS", 0x00, "Arabic_PF_A"),
    c(0xFD40, None, "ARABIC LIGATURE RAHIMAHU ALLAAH", 0x00, "Arabic_PF_A"),
    c(0xFD41, None, "ARABIC LIGATURE RADI ALLAAHU ANH", 0x00, "Arabic_PF_A"),
    c(0xFD42, None, "ARABIC LIGATURE RADI ALLAAHU ANHAA", 0x00, "Arabic_PF_A"),
    c(0xFD43, None, "ARABIC LIGATURE RADI ALLAAHU ANHUM", 0x00, "Arabic_PF_A"),
    c(0xFD44, None, "ARABIC LIGATURE RADI ALLAAHU ANHUMAA", 0x00, "Arabic_PF_A"),
    c(0xFD45, None, "ARABIC LIGATURE RADI ALLAAHU ANHUNNA", 0x00, "Arabic_PF_A"),
    c(0xFD46, None, "ARABIC LIGATURE SALLALLAAHU ALAYHI WA-AALIH", 0x00, "Arabic_PF_A"),
    c(0xFD47, None, "ARABIC LIGATURE ALAYHI AS-SALAAM", 0x00, "Arabic_PF_A"),
    c(0xFD48, None, "ARABIC LIGATURE ALAYHIM AS-SALAAM", 0x00, "Arabic_PF_A"),
    c(0xFD49, None, "ARABIC LIGATURE ALAYHIMAA AS-SALAAM", 0x00, "Arabic_PF_A"),
    c(0xFD4A, None, "ARABIC LIGATURE ALAYHI AS-SALAATU WAS-SALAAM", 0x00, "Arabic_PF_A"),
    c(0xFD4B, None, "ARABIC LIGATURE QUDDISA SIRRAH", 0x00, "Arabic_PF_A"),
    c(0xFD4C, None, "ARABIC LIGATURE SALLALLAHU ALAYHI WAAALIHEE WA-SALLAM", 0x00, "Arabic_PF_A"),
    c(0xFD4D, None, "ARABIC LIGATURE ALAYHAA AS-SALAAM", 0x00, "Arabic_PF_A"),
    c(0xFD4E, None, "ARABIC LIGATURE TABAARAKA WA-TAAALAA", 0x00, "Arabic_PF_A"),
    c(0xFD4F, None, "ARABIC LIGATURE RAHIMAHUM ALLAAH", 0x00, "Arabic_PF_A"),
    c(0xFD50, None, "ARABIC LIGATURE TEH WITH JEEM WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD51, None, "ARABIC LIGATURE TEH WITH HAH WITH JEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD52, None, "ARABIC LIGATURE TEH WITH HAH WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD53, None, "ARABIC LIGATURE TEH WITH HAH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD54, None, "ARABIC LIGATURE TEH WITH KHAH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD55, None, "ARABIC LIGATURE TEH WITH MEEM WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD56, None, "ARABIC LIGATURE TEH WITH MEEM WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD57, None, "ARABIC LIGATURE TEH WITH MEEM WITH KHAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD58, None, "ARABIC LIGATURE JEEM WITH MEEM WITH HAH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD59, None, "ARABIC LIGATURE JEEM WITH MEEM WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD5A, None, "ARABIC LIGATURE HAH WITH MEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD5B, None, "ARABIC LIGATURE HAH WITH MEEM WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD5C, None, "ARABIC LIGATURE SEEN WITH HAH WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD5D, None, "ARABIC LIGATURE SEEN WITH JEEM WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD5E, None, "ARABIC LIGATURE SEEN WITH JEEM WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD5F, None, "ARABIC LIGATURE SEEN WITH MEEM WITH HAH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD60, None, "ARABIC LIGATURE SEEN WITH MEEM WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD61, None, "ARABIC LIGATURE SEEN WITH MEEM WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD62, None, "ARABIC LIGATURE SEEN WITH MEEM WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD63, None, "ARABIC LIGATURE SEEN WITH MEEM WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD64, None, "ARABIC LIGATURE SAD WITH HAH WITH HAH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD65, None, "ARABIC LIGATURE SAD WITH HAH WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD66, None, "ARABIC LIGATURE SAD WITH MEEM WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD67, None, "ARABIC LIGATURE SHEEN WITH HAH WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD68, None, "ARABIC LIGATURE SHEEN WITH HAH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD69, None, "ARABIC LIGATURE SHEEN WITH JEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD6A, None, "ARABIC LIGATURE SHEEN WITH MEEM WITH KHAH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD6B, None, "ARABIC LIGATURE SHEEN WITH MEEM WITH KHAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD6C, None, "ARABIC LIGATURE SHEEN WITH MEEM WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD6D, None, "ARABIC LIGATURE SHEEN WITH MEEM WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD6E, None, "ARABIC LIGATURE DAD WITH HAH WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD6F, None, "ARABIC LIGATURE DAD WITH KHAH WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD70, None, "ARABIC LIGATURE DAD WITH KHAH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD71, None, "ARABIC LIGATURE TAH WITH MEEM WITH HAH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD72, None, "ARABIC LIGATURE TAH WITH MEEM WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD73, None, "ARABIC LIGATURE TAH WITH MEEM WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD74, None, "ARABIC LIGATURE TAH WITH MEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD75, None, "ARABIC LIGATURE AIN WITH JEEM WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD76, None, "ARABIC LIGATURE AIN WITH MEEM WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD77, None, "ARABIC LIGATURE AIN WITH MEEM WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD78, None, "ARABIC LIGATURE AIN WITH MEEM WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD79, None, "ARABIC LIGATURE GHAIN WITH MEEM WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD7A, None, "ARABIC LIGATURE GHAIN WITH MEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD7B, None, "ARABIC LIGATURE GHAIN WITH MEEM WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD7C, None, "ARABIC LIGATURE FEH WITH KHAH WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD7D, None, "ARABIC LIGATURE FEH WITH KHAH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD7E, None, "ARABIC LIGATURE QAF WITH MEEM WITH HAH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD7F, None, "ARABIC LIGATURE QAF WITH MEEM WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD80, None, "ARABIC LIGATURE LAM WITH HAH WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD81, None, "ARABIC LIGATURE LAM WITH HAH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD82, None, "ARABIC LIGATURE LAM WITH HAH WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD83, None, "ARABIC LIGATURE LAM WITH JEEM WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD84, None, "ARABIC LIGATURE LAM WITH JEEM WITH JEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD85, None, "ARABIC LIGATURE LAM WITH KHAH WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD86, None, "ARABIC LIGATURE LAM WITH KHAH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD87, None, "ARABIC LIGATURE LAM WITH MEEM WITH HAH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD88, None, "ARABIC LIGATURE LAM WITH MEEM WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD89, None, "ARABIC LIGATURE MEEM WITH HAH WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD8A, None, "ARABIC LIGATURE MEEM WITH HAH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD8B, None, "ARABIC LIGATURE MEEM WITH HAH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD8C, None, "ARABIC LIGATURE MEEM WITH JEEM WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD8D, None, "ARABIC LIGATURE MEEM WITH JEEM WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD8E, None, "ARABIC LIGATURE MEEM WITH KHAH WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD8F, None, "ARABIC LIGATURE MEEM WITH KHAH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD92, None, "ARABIC LIGATURE MEEM WITH JEEM WITH KHAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD93, None, "ARABIC LIGATURE HEH WITH MEEM WITH JEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD94, None, "ARABIC LIGATURE HEH WITH MEEM WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD95, None, "ARABIC LIGATURE NOON WITH HAH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD96, None, "ARABIC LIGATURE NOON WITH HAH WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD97, None, "ARABIC LIGATURE NOON WITH JEEM WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD98, None, "ARABIC LIGATURE NOON WITH JEEM WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD99, None, "ARABIC LIGATURE NOON WITH JEEM WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD9A, None, "ARABIC LIGATURE NOON WITH MEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD9B, None, "ARABIC LIGATURE NOON WITH MEEM WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD9C, None, "ARABIC LIGATURE YEH WITH MEEM WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD9D, None, "ARABIC LIGATURE YEH WITH MEEM WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD9E, None, "ARABIC LIGATURE BEH WITH KHAH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFD9F, None, "ARABIC LIGATURE TEH WITH JEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDA0, None, "ARABIC LIGATURE TEH WITH JEEM WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDA1, None, "ARABIC LIGATURE TEH WITH KHAH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDA2, None, "ARABIC LIGATURE TEH WITH KHAH WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDA3, None, "ARABIC LIGATURE TEH WITH MEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDA4, None, "ARABIC LIGATURE TEH WITH MEEM WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDA5, None, "ARABIC LIGATURE JEEM WITH MEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDA6, None, "ARABIC LIGATURE JEEM WITH HAH WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDA7, None, "ARABIC LIGATURE JEEM WITH MEEM WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDA8, None, "ARABIC LIGATURE SEEN WITH KHAH WITH ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDA9, None, "ARABIC LIGATURE SAD WITH HAH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDAA, None, "ARABIC LIGATURE SHEEN WITH HAH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDAB, None, "ARABIC LIGATURE DAD WITH HAH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDAC, None, "ARABIC LIGATURE LAM WITH JEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDAD, None, "ARABIC LIGATURE LAM WITH MEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDAE, None, "ARABIC LIGATURE YEH WITH HAH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDAF, None, "ARABIC LIGATURE YEH WITH JEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDB0, None, "ARABIC LIGATURE YEH WITH MEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDB1, None, "ARABIC LIGATURE MEEM WITH MEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDB2, None, "ARABIC LIGATURE QAF WITH MEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDB3, None, "ARABIC LIGATURE NOON WITH HAH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDB4, None, "ARABIC LIGATURE QAF WITH MEEM WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDB5, None, "ARABIC LIGATURE LAM WITH HAH WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDB6, None, "ARABIC LIGATURE AIN WITH MEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDB7, None, "ARABIC LIGATURE KAF WITH MEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDB8, None, "ARABIC LIGATURE NOON WITH JEEM WITH HAH INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDB9, None, "ARABIC LIGATURE MEEM WITH KHAH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDBA, None, "ARABIC LIGATURE LAM WITH JEEM WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDBB, None, "ARABIC LIGATURE KAF WITH MEEM WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDBC, None, "ARABIC LIGATURE LAM WITH JEEM WITH MEEM FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDBD, None, "ARABIC LIGATURE NOON WITH JEEM WITH HAH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDBE, None, "ARABIC LIGATURE JEEM WITH HAH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDBF, None, "ARABIC LIGATURE HAH WITH JEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDC0, None, "ARABIC LIGATURE MEEM WITH JEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDC1, None, "ARABIC LIGATURE FEH WITH MEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDC2, None, "ARABIC LIGATURE BEH WITH HAH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDC3, None, "ARABIC LIGATURE KAF WITH MEEM WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDC4, None, "ARABIC LIGATURE AIN WITH JEEM WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDC5, None, "ARABIC LIGATURE SAD WITH MEEM WITH MEEM INITIAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDC6, None, "ARABIC LIGATURE SEEN WITH KHAH WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDC7, None, "ARABIC LIGATURE NOON WITH JEEM WITH YEH FINAL FORM", 0x31, "Arabic_PF_A"),
    c(0xFDCF, None, "ARABIC LIGATURE SALAAMUHU ALAYNAA", 0x00, "Arabic_PF_A"),
    c(0xFDF0, None, "ARABIC LIGATURE SALLA USED AS KORANIC STOP SIGN ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFDF1, None, "ARABIC LIGATURE QALA USED AS KORANIC STOP SIGN ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFDF2, None, "ARABIC LIGATURE ALLAH ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFDF3, None, "ARABIC LIGATURE AKBAR ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFDF4, None, "ARABIC LIGATURE MOHAMMAD ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFDF5, None, "ARABIC LIGATURE SALAM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFDF6, None, "ARABIC LIGATURE RASOUL ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFDF7, None, "ARABIC LIGATURE ALAYHE ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFDF8, None, "ARABIC LIGATURE WASALLAM ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFDF9, None, "ARABIC LIGATURE SALLA ISOLATED FORM", 0x31, "Arabic_PF_A"),
    c(0xFDFA, None, "ARABIC LIGATURE SALLALLAHOU ALAYHE WASALLAM", 0x01, "Arabic_PF_A"),
    c(0xFDFB, None, "ARABIC LIGATURE JALLAJALALOUHOU", 0x01, "Arabic_PF_A"),
    c(0xFDFC, None, "RIAL SIGN", 0x00, "Arabic_PF_A"),
    c(0xFDFD, None, "ARABIC LIGATURE BISMILLAH AR-RAHMAN AR-RAHEEM", 0x00, "Arabic_PF_A"),
    c(0xFDFE, None, "ARABIC LIGATURE SUBHAANAHU WA TAAALAA", 0x00, "Arabic_PF_A"),
    c(0xFDFF, None, "ARABIC LIGATURE AZZA WA JALL", 0x00, "Arabic_PF_A"),
    c(0xFE00, None, "VARIATION SELECTOR-1", 0x20, "VS"),
    c(0xFE01, None, "VARIATION SELECTOR-2", 0x20, "VS"),
    c(0xFE02, None, "VARIATION SELECTOR-3", 0x20, "VS"),
    c(0xFE03, None, "VARIATION SELECTOR-4", 0x20, "VS"),
    c(0xFE04, None, "VARIATION SELECTOR-5", 0x20, "VS"),
    c(0xFE05, None, "VARIATION SELECTOR-6", 0x20, "VS"),
    c(0xFE06, None, "VARIATION SELECTOR-7", 0x20, "VS"),
    c(0xFE07, None, "VARIATION SELECTOR-8", 0x20, "VS"),
    c(0xFE08, None, "VARIATION SELECTOR-9", 0x20, "VS"),
    c(0xFE09, None, "VARIATION SELECTOR-10", 0x20, "VS"),
    c(0xFE0A, None, "VARIATION SELECTOR-11", 0x20, "VS"),
    c(0xFE0B, None, "VARIATION SELECTOR-12", 0x20, "VS"),
    c(0xFE0C, None, "VARIATION SELECTOR-13", 0x20, "VS"),
    c(0xFE0D, None, "VARIATION SELECTOR-14", 0x20, "VS"),
    c(0xFE0E, None, "VARIATION SELECTOR-15", 0x20, "VS"),
    c(0xFE0F, None, "VARIATION SELECTOR-16", 0x20, "VS"),
    c(0xFE10, None, "PRESENTATION FORM FOR VERTICAL COMMA", 0x00, "Vertical_Forms"),
    c(0xFE11, None, "PRESENTATION FORM FOR VERTICAL IDEOGRAPHIC COMMA", 0x00, "Vertical_Forms"),
    c(0xFE12, None, "PRESENTATION FORM FOR VERTICAL IDEOGRAPHIC FULL STOP", 0x00, "Vertical_Forms"),
    c(0xFE13, None, "PRESENTATION FORM FOR VERTICAL COLON", 0x00, "Vertical_Forms"),
    c(0xFE14, None, "PRESENTATION FORM FOR VERTICAL SEMICOLON", 0x00, "Vertical_Forms"),
    c(0xFE15, None, "PRESENTATION FORM FOR VERTICAL EXCLAMATION MARK", 0x00, "Vertical_Forms"),
    c(0xFE16, None, "PRESENTATION FORM FOR VERTICAL QUESTION MARK", 0x00, "Vertical_Forms"),
    c(0xFE17, None, "PRESENTATION FORM FOR VERTICAL LEFT WHITE LENTICULAR BRACKET", 0x00, "Vertical_Forms"),
    c(0xFE18, None, "PRESENTATION FORM FOR VERTICAL RIGHT WHITE LENTICULAR BRACKET", 0x00, "Vertical_Forms"),
    c(0xFE19, None, "PRESENTATION FORM FOR VERTICAL HORIZONTAL ELLIPSIS", 0x00, "Vertical_Forms"),
    c(0xFE20, None, "COMBINING LIGATURE LEFT HALF", 0x20, "Half_Marks"),
    c(0xFE21, None, "COMBINING LIGATURE RIGHT HALF", 0x20, "Half_Marks"),
    c(0xFE22, None, "COMBINING DOUBLE TILDE LEFT HALF", 0x20, "Half_Marks"),
    c(0xFE23, None, "COMBINING DOUBLE TILDE RIGHT HALF", 0x20, "Half_Marks"),
    c(0xFE24, None, "COMBINING MACRON LEFT HALF", 0x20, "Half_Marks"),
    c(0xFE25, None, "COMBINING MACRON RIGHT HALF", 0x20, "Half_Marks"),
    c(0xFE26, None, "COMBINING CONJOINING MACRON", 0x20, "Half_Marks"),
    c(0xFE27, None, "COMBINING LIGATURE LEFT HALF BELOW", 0x20, "Half_Marks"),
    c(0xFE28, None, "COMBINING LIGATURE RIGHT HALF BELOW", 0x20, "Half_Marks"),
    c(0xFE29, None, "COMBINING TILDE LEFT HALF BELOW", 0x20, "Half_Marks"),
    c(0xFE2A, None, "COMBINING TILDE RIGHT HALF BELOW", 0x20, "Half_Marks"),
    c(0xFE2B, None, "COMBINING MACRON LEFT HALF BELOW", 0x20, "Half_Marks"),
    c(0xFE2C, None, "COMBINING MACRON RIGHT HALF BELOW", 0x20, "Half_Marks"),
    c(0xFE2D, None, "COMBINING CONJOINING MACRON BELOW", 0x20, "Half_Marks"),
    c(0xFE2E, None, "COMBINING CYRILLIC TITLO LEFT HALF", 0x20, "Half_Marks"),
    c(0xFE2F, None, "COMBINING CYRILLIC TITLO RIGHT HALF", 0x20, "Half_Marks"),
    c(0xFE30, None, "PRESENTATION FORM FOR VERTICAL TWO DOT LEADER", 0x00, "CJK_Compat_Forms"),
    c(0xFE31, None, "PRESENTATION FORM FOR VERTICAL EM DASH", 0x00, "CJK_Compat_Forms"),
    c(0xFE32, None, "PRESENTATION FORM FOR VERTICAL EN DASH", 0x00, "CJK_Compat_Forms"),
    c(0xFE33, None, "PRESENTATION FORM FOR VERTICAL LOW LINE", 0x20, "CJK_Compat_Forms"),
    c(0xFE34, None, "PRESENTATION FORM FOR VERTICAL WAVY LOW LINE", 0x20, "CJK_Compat_Forms"),
    c(0xFE35, None, "PRESENTATION FORM FOR VERTICAL LEFT PARENTHESIS", 0x00, "CJK_Compat_Forms"),
    c(0xFE36, None, "PRESENTATION FORM FOR VERTICAL RIGHT PARENTHESIS", 0x00, "CJK_Compat_Forms"),
    c(0xFE37, None, "PRESENTATION FORM FOR VERTICAL LEFT CURLY BRACKET", 0x00, "CJK_Compat_Forms"),
    c(0xFE38, None, "PRESENTATION FORM FOR VERTICAL RIGHT CURLY BRACKET", 0x00, "CJK_Compat_Forms"),
    c(0xFE39, None, "PRESENTATION FORM FOR VERTICAL LEFT TORTOISE SHELL BRACKET", 0x00, "CJK_Compat_Forms"),
    c(0xFE3A, None, "PRESENTATION FORM FOR VERTICAL RIGHT TORTOISE SHELL BRACKET", 0x00, "CJK_Compat_Forms"),
    c(0xFE3B, None, "PRESENTATION FORM FOR VERTICAL LEFT BLACK LENTICULAR BRACKET", 0x00, "CJK_Compat_Forms"),
    c(0xFE3C, None, "PRESENTATION FORM FOR VERTICAL RIGHT BLACK LENTICULAR BRACKET", 0x00, "CJK_Compat_Forms"),
    c(0xFE3D, None, "PRESENTATION FORM FOR VERTICAL LEFT DOUBLE ANGLE BRACKET", 0x00, "CJK_Compat_Forms"),
    c(0xFE3E, None, "PRESENTATION FORM FOR VERTICAL RIGHT DOUBLE ANGLE BRACKET", 0x00, "CJK_Compat_Forms"),
    c(0xFE3F, None, "PRESENTATION FORM FOR VERTICAL LEFT ANGLE BRACKET", 0x00, "CJK_Compat_Forms"),
    c(0xFE40, None, "PRESENTATION FORM FOR VERTICAL RIGHT ANGLE BRACKET", 0x00, "CJK_Compat_Forms"),
    c(0xFE41, None, "PRESENTATION FORM FOR VERTICAL LEFT CORNER BRACKET", 0x00, "CJK_Compat_Forms"),
    c(0xFE42, None, "PRESENTATION FORM FOR VERTICAL RIGHT CORNER BRACKET", 0x00, "CJK_Compat_Forms"),
    c(0xFE43, None, "PRESENTATION FORM FOR VERTICAL LEFT WHITE CORNER BRACKET", 0x00, "CJK_Compat_Forms"),
    c(0xFE44, None, "PRESENTATION FORM FOR VERTICAL RIGHT WHITE CORNER BRACKET", 0x00, "CJK_Compat_Forms"),
    c(0xFE45, None, "SESAME DOT", 0x00, "CJK_Compat_Forms"),
    c(0xFE46, None, "WHITE SESAME DOT", 0x00, "CJK_Compat_Forms"),
    c(0xFE47, None, "PRESENTATION FORM FOR VERTICAL LEFT SQUARE BRACKET", 0x00, "CJK_Compat_Forms"),
    c(0xFE48, None, "PRESENTATION FORM FOR VERTICAL RIGHT SQUARE BRACKET", 0x00, "CJK_Compat_Forms"),
    c(0xFE49, None, "DASHED OVERLINE", 0x00, "CJK_Compat_Forms"),
    c(0xFE4A, None, "CENTRELINE OVERLINE", 0x00, "CJK_Compat_Forms"),
    c(0xFE4B, None, "WAVY OVERLINE", 0x00, "CJK_Compat_Forms"),
    c(0xFE4C, None, "DOUBLE WAVY OVERLINE", 0x00, "CJK_Compat_Forms"),
    c(0xFE4D, None, "DASHED LOW LINE", 0x20, "CJK_Compat_Forms"),
    c(0xFE4E, None, "CENTRELINE LOW LINE", 0x20, "CJK_Compat_Forms"),
    c(0xFE4F, None, "WAVY LOW LINE", 0x20, "CJK_Compat_Forms"),
    c(0xFE50, None, "SMALL COMMA", 0x00, "Small_Forms"),
    c(0xFE51, None, "SMALL IDEOGRAPHIC COMMA", 0x00, "Small_Forms"),
    c(0xFE52, None, "SMALL FULL STOP", 0x00, "Small_Forms"),
    c(0xFE54, None, "SMALL SEMICOLON", 0x00, "Small_Forms"),
    c(0xFE55, None, "SMALL COLON", 0x00, "Small_Forms"),
    c(0xFE56, None, "SMALL QUESTION MARK", 0x00, "Small_Forms"),
    c(0xFE57, None, "SMALL EXCLAMATION MARK", 0x00, "Small_Forms"),
    c(0xFE58, None, "SMALL EM DASH", 0x00, "Small_Forms"),
    c(0xFE59, None, "SMALL LEFT PARENTHESIS", 0x00, "Small_Forms"),
    c(0xFE5A, None, "SMALL RIGHT PARENTHESIS", 0x00, "Small_Forms"),
    c(0xFE5B, None, "SMALL LEFT CURLY BRACKET", 0x00, "Small_Forms"),
    c(0xFE5C, None, "SMALL RIGHT CURLY BRACKET", 0x00, "Small_Forms"),
    c(0xFE5D, None, "SMALL LEFT TORTOISE SHELL BRACKET", 0x00, "Small_Forms"),
    c(0xFE5E, None, "SMALL RIGHT TORTOISE SHELL BRACKET", 0x00, "Small_Forms"),
    c(0xFE5F, None, "SMALL NUMBER SIGN", 0x00, "Small_Forms"),
    c(0xFE60, None, "SMALL AMPERSAND", 0x00, "Small_Forms"),
    c(0xFE61, None, "SMALL ASTERISK", 0x02, "Small_Forms"),
    c(0xFE62, None, "SMALL PLUS SIGN", 0x02, "Small_Forms"),
    c(0xFE63, None, "SMALL HYPHEN-MINUS", 0x02, "Small_Forms"),
    c(0xFE64, None, "SMALL LESS-THAN SIGN", 0x02, "Small_Forms"),
    c(0xFE65, None, "SMALL GREATER-THAN SIGN", 0x02, "Small_Forms"),
    c(0xFE66, None, "SMALL EQUALS SIGN", 0x02, "Small_Forms"),
    c(0xFE68, None, "SMALL REVERSE SOLIDUS", 0x02, "Small_Forms"),
    c(0xFE69, None, "SMALL DOLLAR SIGN", 0x00, "Small_Forms"),
    c(0xFE6A, None, "SMALL PERCENT SIGN", 0x00, "Small_Forms"),
    c(0xFE6B, None, "SMALL COMMERCIAL AT", 0x00, "Small_Forms"),
    c(0xFE70, None, "ARABIC FATHATAN ISOLATED FORM", 0x01, "Arabic_PF_B"),
    c(0xFE71, None, "ARABIC TATWEEL WITH FATHATAN ABOVE", 0x31, "Arabic_PF_B"),
    c(0xFE72, None, "ARABIC DAMMATAN ISOLATED FORM", 0x01, "Arabic_PF_B"),
    c(0xFE73, None, "ARABIC TAIL FRAGMENT", 0x31, "Arabic_PF_B"),
    c(0xFE74, None, "ARABIC KASRATAN ISOLATED FORM", 0x01, "Arabic_PF_B"),
    c(0xFE76, None, "ARABIC FATHA ISOLATED FORM", 0x01, "Arabic_PF_B"),
    c(0xFE77, None, "ARABIC FATHA MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE78, None, "ARABIC DAMMA ISOLATED FORM", 0x01, "Arabic_PF_B"),
    c(0xFE79, None, "ARABIC DAMMA MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE7A, None, "ARABIC KASRA ISOLATED FORM", 0x01, "Arabic_PF_B"),
    c(0xFE7B, None, "ARABIC KASRA MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE7C, None, "ARABIC SHADDA ISOLATED FORM", 0x01, "Arabic_PF_B"),
    c(0xFE7D, None, "ARABIC SHADDA MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE7E, None, "ARABIC SUKUN ISOLATED FORM", 0x01, "Arabic_PF_B"),
    c(0xFE7F, None, "ARABIC SUKUN MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE80, None, "ARABIC LETTER HAMZA ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFE81, None, "ARABIC LETTER ALEF WITH MADDA ABOVE ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFE82, None, "ARABIC LETTER ALEF WITH MADDA ABOVE FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE83, None, "ARABIC LETTER ALEF WITH HAMZA ABOVE ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFE84, None, "ARABIC LETTER ALEF WITH HAMZA ABOVE FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE85, None, "ARABIC LETTER WAW WITH HAMZA ABOVE ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFE86, None, "ARABIC LETTER WAW WITH HAMZA ABOVE FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE87, None, "ARABIC LETTER ALEF WITH HAMZA BELOW ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFE88, None, "ARABIC LETTER ALEF WITH HAMZA BELOW FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE89, None, "ARABIC LETTER YEH WITH HAMZA ABOVE ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFE8A, None, "ARABIC LETTER YEH WITH HAMZA ABOVE FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE8B, None, "ARABIC LETTER YEH WITH HAMZA ABOVE INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE8C, None, "ARABIC LETTER YEH WITH HAMZA ABOVE MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE8D, None, "ARABIC LETTER ALEF ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFE8E, None, "ARABIC LETTER ALEF FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE8F, None, "ARABIC LETTER BEH ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFE90, None, "ARABIC LETTER BEH FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE91, None, "ARABIC LETTER BEH INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE92, None, "ARABIC LETTER BEH MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE93, None, "ARABIC LETTER TEH MARBUTA ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFE94, None, "ARABIC LETTER TEH MARBUTA FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE95, None, "ARABIC LETTER TEH ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFE96, None, "ARABIC LETTER TEH FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE97, None, "ARABIC LETTER TEH INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE98, None, "ARABIC LETTER TEH MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE99, None, "ARABIC LETTER THEH ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFE9A, None, "ARABIC LETTER THEH FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE9B, None, "ARABIC LETTER THEH INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE9C, None, "ARABIC LETTER THEH MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE9D, None, "ARABIC LETTER JEEM ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFE9E, None, "ARABIC LETTER JEEM FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFE9F, None, "ARABIC LETTER JEEM INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEA0, None, "ARABIC LETTER JEEM MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEA1, None, "ARABIC LETTER HAH ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEA2, None, "ARABIC LETTER HAH FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEA3, None, "ARABIC LETTER HAH INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEA4, None, "ARABIC LETTER HAH MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEA5, None, "ARABIC LETTER KHAH ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEA6, None, "ARABIC LETTER KHAH FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEA7, None, "ARABIC LETTER KHAH INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEA8, None, "ARABIC LETTER KHAH MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEA9, None, "ARABIC LETTER DAL ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEAA, None, "ARABIC LETTER DAL FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEAB, None, "ARABIC LETTER THAL ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEAC, None, "ARABIC LETTER THAL FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEAD, None, "ARABIC LETTER REH ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEAE, None, "ARABIC LETTER REH FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEAF, None, "ARABIC LETTER ZAIN ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEB0, None, "ARABIC LETTER ZAIN FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEB1, None, "ARABIC LETTER SEEN ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEB2, None, "ARABIC LETTER SEEN FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEB3, None, "ARABIC LETTER SEEN INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEB4, None, "ARABIC LETTER SEEN MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEB5, None, "ARABIC LETTER SHEEN ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEB6, None, "ARABIC LETTER SHEEN FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEB7, None, "ARABIC LETTER SHEEN INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEB8, None, "ARABIC LETTER SHEEN MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEB9, None, "ARABIC LETTER SAD ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEBA, None, "ARABIC LETTER SAD FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEBB, None, "ARABIC LETTER SAD INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEBC, None, "ARABIC LETTER SAD MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEBD, None, "ARABIC LETTER DAD ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEBE, None, "ARABIC LETTER DAD FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEBF, None, "ARABIC LETTER DAD INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEC0, None, "ARABIC LETTER DAD MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEC1, None, "ARABIC LETTER TAH ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEC2, None, "ARABIC LETTER TAH FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEC3, None, "ARABIC LETTER TAH INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEC4, None, "ARABIC LETTER TAH MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEC5, None, "ARABIC LETTER ZAH ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEC6, None, "ARABIC LETTER ZAH FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEC7, None, "ARABIC LETTER ZAH INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEC8, None, "ARABIC LETTER ZAH MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEC9, None, "ARABIC LETTER AIN ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFECA, None, "ARABIC LETTER AIN FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFECB, None, "ARABIC LETTER AIN INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFECC, None, "ARABIC LETTER AIN MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFECD, None, "ARABIC LETTER GHAIN ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFECE, None, "ARABIC LETTER GHAIN FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFECF, None, "ARABIC LETTER GHAIN INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFED0, None, "ARABIC LETTER GHAIN MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFED1, None, "ARABIC LETTER FEH ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFED2, None, "ARABIC LETTER FEH FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFED3, None, "ARABIC LETTER FEH INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFED4, None, "ARABIC LETTER FEH MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFED5, None, "ARABIC LETTER QAF ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFED6, None, "ARABIC LETTER QAF FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFED7, None, "ARABIC LETTER QAF INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFED8, None, "ARABIC LETTER QAF MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFED9, None, "ARABIC LETTER KAF ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEDA, None, "ARABIC LETTER KAF FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEDB, None, "ARABIC LETTER KAF INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEDC, None, "ARABIC LETTER KAF MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEDD, None, "ARABIC LETTER LAM ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEDE, None, "ARABIC LETTER LAM FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEDF, None, "ARABIC LETTER LAM INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEE0, None, "ARABIC LETTER LAM MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEE1, None, "ARABIC LETTER MEEM ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEE2, None, "ARABIC LETTER MEEM FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEE3, None, "ARABIC LETTER MEEM INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEE4, None, "ARABIC LETTER MEEM MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEE5, None, "ARABIC LETTER NOON ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEE6, None, "ARABIC LETTER NOON FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEE7, None, "ARABIC LETTER NOON INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEE8, None, "ARABIC LETTER NOON MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEE9, None, "ARABIC LETTER HEH ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEEA, None, "ARABIC LETTER HEH FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEEB, None, "ARABIC LETTER HEH INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEEC, None, "ARABIC LETTER HEH MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEED, None, "ARABIC LETTER WAW ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEEE, None, "ARABIC LETTER WAW FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEEF, None, "ARABIC LETTER ALEF MAKSURA ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEF0, None, "ARABIC LETTER ALEF MAKSURA FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEF1, None, "ARABIC LETTER YEH ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEF2, None, "ARABIC LETTER YEH FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEF3, None, "ARABIC LETTER YEH INITIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEF4, None, "ARABIC LETTER YEH MEDIAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEF5, None, "ARABIC LIGATURE LAM WITH ALEF WITH MADDA ABOVE ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEF6, None, "ARABIC LIGATURE LAM WITH ALEF WITH MADDA ABOVE FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEF7, None, "ARABIC LIGATURE LAM WITH ALEF WITH HAMZA ABOVE ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEF8, None, "ARABIC LIGATURE LAM WITH ALEF WITH HAMZA ABOVE FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEF9, None, "ARABIC LIGATURE LAM WITH ALEF WITH HAMZA BELOW ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEFA, None, "ARABIC LIGATURE LAM WITH ALEF WITH HAMZA BELOW FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEFB, None, "ARABIC LIGATURE LAM WITH ALEF ISOLATED FORM", 0x31, "Arabic_PF_B"),
    c(0xFEFC, None, "ARABIC LIGATURE LAM WITH ALEF FINAL FORM", 0x31, "Arabic_PF_B"),
    c(0xFEFF, None, "ZERO WIDTH NO-BREAK SPACE", 0x00, "Arabic_PF_B"),
    c(0xFF01, None, "FULLWIDTH EXCLAMATION MARK", 0x00, "Half_And_Full_Forms"),
    c(0xFF02, None, "FULLWIDTH QUOTATION MARK", 0x00, "Half_And_Full_Forms"),
    c(0xFF03, None, "FULLWIDTH NUMBER SIGN", 0x00, "Half_And_Full_Forms"),
    c(0xFF04, None, "FULLWIDTH DOLLAR SIGN", 0x00, "Half_And_Full_Forms"),
    c(0xFF05, None, "FULLWIDTH PERCENT SIGN", 0x00, "Half_And_Full_Forms"),
    c(0xFF06, None, "FULLWIDTH AMPERSAND", 0x00, "Half_And_Full_Forms"),
    c(0xFF07, None, "FULLWIDTH APOSTROPHE", 0x00, "Half_And_Full_Forms"),
    c(0xFF08, None, "FULLWIDTH LEFT PARENTHESIS", 0x00, "Half_And_Full_Forms"),
    c(0xFF09, None, "FULLWIDTH RIGHT PARENTHESIS", 0x00, "Half_And_Full_Forms"),
    c(0xFF0A, None, "FULLWIDTH ASTERISK", 0x00, "Half_And_Full_Forms"),
    c(0xFF0B, None, "FULLWIDTH PLUS SIGN", 0x02, "Half_And_Full_Forms"),
    c(0xFF0C, None, "FULLWIDTH COMMA", 0x00, "Half_And_Full_Forms"),
    c(0xFF0D, None, "FULLWIDTH HYPHEN-MINUS", 0x00, "Half_And_Full_Forms"),
    c(0xFF0E, None, "FULLWIDTH FULL STOP", 0x00, "Half_And_Full_Forms"),
    c(0xFF0F, None, "FULLWIDTH SOLIDUS", 0x00, "Half_And_Full_Forms"),
    c(0xFF10, None, "FULLWIDTH DIGIT ZERO", 0x20, "Half_And_Full_Forms"),
    c(0xFF11, None, "FULLWIDTH DIGIT ONE", 0x20, "Half_And_Full_Forms"),
    c(0xFF12, None, "FULLWIDTH DIGIT TWO", 0x20, "Half_And_Full_Forms"),
    c(0xFF13, None, "FULLWIDTH DIGIT THREE", 0x20, "Half_And_Full_Forms"),
    c(0xFF14, None, "FULLWIDTH DIGIT FOUR", 0x20, "Half_And_Full_Forms"),
    c(0xFF15, None, "FULLWIDTH DIGIT FIVE", 0x20, "Half_And_Full_Forms"),
    c(0xFF16, None, "FULLWIDTH DIGIT SIX", 0x20, "Half_And_Full_Forms"),
    c(0xFF17, None, "FULLWIDTH DIGIT SEVEN", 0x20, "Half_And_Full_Forms"),
    c(0xFF18, None, "FULLWIDTH DIGIT EIGHT", 0x20, "Half_And_Full_Forms"),
    c(0xFF19, None, "FULLWIDTH DIGIT NINE", 0x20, "Half_And_Full_Forms"),
    c(0xFF1A, None, "FULLWIDTH COLON", 0x00, "Half_And_Full_Forms"),
    c(0xFF1B, None, "FULLWIDTH SEMICOLON", 0x00, "Half_And_Full_Forms"),
    c(0xFF1C, None, "FULLWIDTH LESS-THAN SIGN", 0x02, "Half_And_Full_Forms"),
    c(0xFF1D, None, "FULLWIDTH EQUALS SIGN", 0x02, "Half_And_Full_Forms"),
    c(0xFF1E, None, "FULLWIDTH GREATER-THAN SIGN", 0x02, "Half_And_Full_Forms"),
    c(0xFF1F, None, "FULLWIDTH QUESTION MARK", 0x00, "Half_And_Full_Forms"),
    c(0xFF20, None, "FULLWIDTH COMMERCIAL AT", 0x00, "Half_And_Full_Forms"),
    c(0xFF21, None, "FULLWIDTH LATIN CAPITAL LETTER A", 0x31, "Half_And_Full_Forms"),
    c(0xFF22, None, "FULLWIDTH LATIN CAPITAL LETTER B", 0x31, "Half_And_Full_Forms"),
    c(0xFF23, None, "FULLWIDTH LATIN CAPITAL LETTER C", 0x31, "Half_And_Full_Forms"),
    c(0xFF24, None, "FULLWIDTH LATIN CAPITAL LETTER D", 0x31, "Half_And_Full_Forms"),
    c(0xFF25, None, "FULLWIDTH LATIN CAPITAL LETTER E", 0x31, "Half_And_Full_Forms"),
    c(0xFF26, None, "FULLWIDTH LATIN CAPITAL LETTER F", 0x31, "Half_And_Full_Forms"),
    c(0xFF27, None, "FULLWIDTH LATIN CAPITAL LETTER G", 0x31, "Half_And_Full_Forms"),
    c(0xFF28, None, "FULLWIDTH LATIN CAPITAL LETTER H", 0x31, "Half_And_Full_Forms"),
    c(0xFF29, None, "FULLWIDTH LATIN CAPITAL LETTER I", 0x31, "Half_And_Full_Forms"),
    c(0xFF2A, None, "FULLWIDTH LATIN CAPITAL LETTER J", 0x31, "Half_And_Full_Forms"),
    c(0xFF2B, None, "FULLWIDTH LATIN CAPITAL LETTER K", 0x31, "Half_And_Full_Forms"),
    c(0xFF2C, None, "FULLWIDTH LATIN CAPITAL LETTER L", 0x31, "Half_And_Full_Forms"),
    c(0xFF2D, None, "FULLWIDTH LATIN CAPITAL LETTER M", 0x31, "Half_And_Full_Forms"),
    c(0xFF2E, None, "FULLWIDTH LATIN CAPITAL LETTER N", 0x31, "Half_And_Full_Forms"),
    c(0xFF2F, None, "FULLWIDTH LATIN CAPITAL LETTER O", 0x31, "Half_And_Full_Forms"),
    c(0xFF30, None, "FULLWIDTH LATIN CAPITAL LETTER P", 0x31, "Half_And_Full_Forms"),
    c(0xFF31, None, "FULLWIDTH LATIN CAPITAL LETTER Q", 0x31, "Half_And_Full_Forms"),
    c(0xFF32, None, "FULLWIDTH LATIN CAPITAL LETTER R", 0x31, "Half_And_Full_Forms"),
    c(0xFF33, None, "FULLWIDTH LATIN CAPITAL LETTER S", 0x31, "Half_And_Full_Forms"),
    c(0xFF34, None, "FULLWIDTH LATIN CAPITAL LETTER T", 0x31, "Half_And_Full_Forms"),
    c(0xFF35, None, "FULLWIDTH LATIN CAPITAL LETTER U", 0x31, "Half_And_Full_Forms"),
    c(0xFF36, None, "FULLWIDTH LATIN CAPITAL LETTER V", 0x31, "Half_And_Full_Forms"),
    c(0xFF37, None, "FULLWIDTH LATIN CAPITAL LETTER W", 0x31, "Half_And_Full_Forms"),
    c(0xFF38, None, "FULLWIDTH LATIN CAPITAL LETTER X", 0x31, "Half_And_Full_Forms"),
    c(0xFF39, None, "FULLWIDTH LATIN CAPITAL LETTER Y", 0x31, "Half_And_Full_Forms"),
    c(0xFF3A, None, "FULLWIDTH LATIN CAPITAL LETTER Z", 0x31, "Half_And_Full_Forms"),
    c(0xFF3B, None, "FULLWIDTH LEFT SQUARE BRACKET", 0x00, "Half_And_Full_Forms"),
    c(0xFF3C, None, "FULLWIDTH REVERSE SOLIDUS", 0x02, "Half_And_Full_Forms"),
    c(0xFF3D, None, "FULLWIDTH RIGHT SQUARE BRACKET", 0x00, "Half_And_Full_Forms"),
    c(0xFF3E, None, "FULLWIDTH CIRCUMFLEX ACCENT", 0x02, "Half_And_Full_Forms"),
    c(0xFF3F, None, "FULLWIDTH LOW LINE", 0x20, "Half_And_Full_Forms"),
    c(0xFF40, None, "FULLWIDTH GRAVE ACCENT", 0x00, "Half_And_Full_Forms"),
    c(0xFF41, None, "FULLWIDTH LATIN SMALL LETTER A", 0x31, "Half_And_Full_Forms"),
    c(0xFF42, None, "FULLWIDTH LATIN SMALL LETTER B", 0x31, "Half_And_Full_Forms"),
    c(0xFF43, None, "FULLWIDTH LATIN SMALL LETTER C", 0x31, "Half_And_Full_Forms"),
    c(0xFF44, None, "FULLWIDTH LATIN SMALL LETTER D", 0x31, "Half_And_Full_Forms"),
    c(0xFF45, None, "FULLWIDTH LATIN SMALL LETTER E", 0x31, "Half_And_Full_Forms"),
    c(0xFF46, None, "FULLWIDTH LATIN SMALL LETTER F", 0x31, "Half_And_Full_Forms"),
    c(0xFF47, None, "FULLWIDTH LATIN SMALL LETTER G", 0x31, "Half_And_Full_Forms"),
    c(0xFF48, None, "FULLWIDTH LATIN SMALL LETTER H", 0x31, "Half_And_Full_Forms"),
    c(0xFF49, None, "FULLWIDTH LATIN SMALL LETTER I", 0x31, "Half_And_Full_Forms"),
    c(0xFF4A, None, "FULLWIDTH LATIN SMALL LETTER J", 0x31, "Half_And_Full_Forms"),
    c(0xFF4B, None, "FULLWIDTH LATIN SMALL LETTER K", 0x31, "Half_And_Full_Forms"),
    c(0xFF4C, None, "FULLWIDTH LATIN SMALL LETTER L", 0x31, "Half_And_Full_Forms"),
    c(0xFF4D, None, "FULLWIDTH LATIN SMALL LETTER M", 0x31, "Half_And_Full_Forms"),
    c(0xFF4E, None, "FULLWIDTH LATIN SMALL LETTER N", 0x31, "Half_And_Full_Forms"),
    c(0xFF4F, None, "FULLWIDTH LATIN SMALL LETTER O", 0x31, "Half_And_Full_Forms"),
    c(0xFF50, None, "FULLWIDTH LATIN SMALL LETTER P", 0x31, "Half_And_Full_Forms"),
    c(0xFF51, None, "FULLWIDTH LATIN SMALL LETTER Q", 0x31, "Half_And_Full_Forms"),
    c(0xFF52, None, "FULLWIDTH LATIN SMALL LETTER R", 0x31, "Half_And_Full_Forms"),
    c(0xFF53, None, "FULLWIDTH LATIN SMALL LETTER S", 0x31, "Half_And_Full_Forms"),
    c(0xFF54, None, "FULLWIDTH LATIN SMALL LETTER T", 0x31, "Half_And_Full_Forms"),
    c(0xFF55, None, "FULLWIDTH LATIN SMALL LETTER U", 0x31, "Half_And_Full_Forms"),
    c(0xFF56, None, "FULLWIDTH LATIN SMALL LETTER V", 0x31, "Half_And_Full_Forms"),
    c(0xFF57, None, "FULLWIDTH LATIN SMALL LETTER W", 0x31, "Half_And_Full_Forms"),
    c(0xFF58, None, "FULLWIDTH LATIN SMALL LETTER X", 0x31, "Half_And_Full_Forms"),
    c(0xFF59, None, "FULLWIDTH LATIN SMALL LETTER Y", 0x31, "Half_And_Full_Forms"),
    c(0xFF5A, None, "FULLWIDTH LATIN SMALL LETTER Z", 0x31, "Half_And_Full_Forms"),
    c(0xFF5B, None, "FULLWIDTH LEFT CURLY BRACKET", 0x00, "Half_And_Full_Forms"),
    c(0xFF5C, None, "FULLWIDTH VERTICAL LINE", 0x02, "Half_And_Full_Forms"),
    c(0xFF5D, None, "FULLWIDTH RIGHT CURLY BRACKET", 0x00, "Half_And_Full_Forms"),
    c(0xFF5E, None, "FULLWIDTH TILDE", 0x02, "Half_And_Full_Forms"),
    c(0xFF5F, None, "FULLWIDTH LEFT WHITE PARENTHESIS", 0x00, "Half_And_Full_Forms"),
    c(0xFF60, None, "FULLWIDTH RIGHT WHITE PARENTHESIS", 0x00, "Half_And_Full_Forms"),
    c(0xFF61, None, "HALFWIDTH IDEOGRAPHIC FULL STOP", 0x00, "Half_And_Full_Forms"),
    c(0xFF62, None, "HALFWIDTH LEFT CORNER BRACKET", 0x00, "Half_And_Full_Forms"),
    c(0xFF63, None, "HALFWIDTH RIGHT CORNER BRACKET", 0x00, "Half_And_Full_Forms"),
    c(0xFF64, None, "HALFWIDTH IDEOGRAPHIC COMMA", 0x00, "Half_And_Full_Forms"),
    c(0xFF65, None, "HALFWIDTH KATAKANA MIDDLE DOT", 0x00, "Half_And_Full_Forms"),
    c(0xFF66, None, "HALFWIDTH KATAKANA LETTER WO", 0x31, "Half_And_Full_Forms"),
    c(0xFF67, None, "HALFWIDTH KATAKANA LETTER SMALL A", 0x31, "Half_And_Full_Forms"),
    c(0xFF68, None, "HALFWIDTH KATAKANA LETTER SMALL I", 0x31, "Half_And_Full_Forms"),
    c(0xFF69, None, "HALFWIDTH KATAKANA LETTER SMALL U", 0x31, "Half_And_Full_Forms"),
    c(0xFF6A, None, "HALFWIDTH KATAKANA LETTER SMALL E", 0x31, "Half_And_Full_Forms"),
    c(0xFF6B, None, "HALFWIDTH KATAKANA LETTER SMALL O", 0x31, "Half_And_Full_Forms"),
    c(0xFF6C, None, "HALFWIDTH KATAKANA LETTER SMALL YA", 0x31, "Half_And_Full_Forms"),
    c(0xFF6D, None, "HALFWIDTH KATAKANA LETTER SMALL YU", 0x31, "Half_And_Full_Forms"),
    c(0xFF6E, None, "HALFWIDTH KATAKANA LETTER SMALL YO", 0x31, "Half_And_Full_Forms"),
    c(0xFF6F, None, "HALFWIDTH KATAKANA LETTER SMALL TU", 0x31, "Half_And_Full_Forms"),
    c(0xFF70, None, "HALFWIDTH KATAKANA-HIRAGANA PROLONGED SOUND MARK", 0x31, "Half_And_Full_Forms"),
    c(0xFF71, None, "HALFWIDTH KATAKANA LETTER A", 0x31, "Half_And_Full_Forms"),
    c(0xFF72, None, "HALFWIDTH KATAKANA LETTER I", 0x31, "Half_And_Full_Forms"),
    c(0xFF73, None, "HALFWIDTH KATAKANA LETTER U", 0x31, "Half_And_Full_Forms"),
    c(0xFF74, None, "HALFWIDTH KATAKANA LETTER E", 0x31, "Half_And_Full_Forms"),
    c(0xFF75, None, "HALFWIDTH KATAKANA LETTER O", 0x31, "Half_And_Full_Forms"),
    c(0xFF76, None, "HALFWIDTH KATAKANA LETTER KA", 0x31, "Half_And_Full_Forms"),
    c(0xFF77, None, "HALFWIDTH KATAKANA LETTER KI", 0x31, "Half_And_Full_Forms"),
    c(0xFF78, None, "HALFWIDTH KATAKANA LETTER KU", 0x31, "Half_And_Full_Forms"),
    c(0xFF79, None, "HALFWIDTH KATAKANA LETTER KE", 0x31, "Half_And_Full_Forms"),
    c(0xFF7A, None, "HALFWIDTH KATAKANA LETTER KO", 0x31, "Half_And_Full_Forms"),
    c(0xFF7B, None, "HALFWIDTH KATAKANA LETTER SA", 0x31, "Half_And_Full_Forms"),
    c(0xFF7C, None, "HALFWIDTH KATAKANA LETTER SI", 0x31, "Half_And_Full_Forms"),
    c(0xFF7D, None, "HALFWIDTH KATAKANA LETTER SU", 0x31, "Half_And_Full_Forms"),
    c(0xFF7E, None, "HALFWIDTH KATAKANA LETTER SE", 0x31, "Half_And_Full_Forms"),
    c(0xFF7F, None, "HALFWIDTH KATAKANA LETTER SO", 0x31, "Half_And_Full_Forms"),
    c(0xFF80, None, "HALFWIDTH KATAKANA LETTER TA", 0x31, "Half_And_Full_Forms"),
    c(0xFF81, None, "HALFWIDTH KATAKANA LETTER TI", 0x31, "Half_And_Full_Forms"),
    c(0xFF82, None, "HALFWIDTH KATAKANA LETTER TU", 0x31, "Half_And_Full_Forms"),
    c(0xFF83, None, "HALFWIDTH KATAKANA LETTER TE", 0x31, "Half_And_Full_Forms"),
    c(0xFF84, None, "HALFWIDTH KATAKANA LETTER TO", 0x31, "Half_And_Full_Forms"),
    c(0xFF85, None, "HALFWIDTH KATAKANA LETTER NA", 0x31, "Half_And_Full_Forms"),
    c(0xFF86, None, "HALFWIDTH KATAKANA LETTER NI", 0x31, "Half_And_Full_Forms"),
    c(0xFF87, None, "HALFWIDTH KATAKANA LETTER NU", 0x31, "Half_And_Full_Forms"),
    c(0xFF88, None, "HALFWIDTH KATAKANA LETTER NE", 0x31, "Half_And_Full_Forms"),
    c(0xFF89, None, "HALFWIDTH KATAKANA LETTER NO", 0x31, "Half_And_Full_Forms"),
    c(0xFF8A, None, "HALFWIDTH KATAKANA LETTER HA", 0x31, "Half_And_Full_Forms"),
    c(0xFF8B, None, "HALFWIDTH KATAKANA LETTER HI", 0x31, "Half_And_Full_Forms"),
    c(0xFF8C, None, "HALFWIDTH KATAKANA LETTER HU", 0x31, "Half_And_Full_Forms"),
    c(0xFF8D, None, "HALFWIDTH KATAKANA LETTER HE", 0x31, "Half_And_Full_Forms"),
    c(0xFF8E, None, "HALFWIDTH KATAKANA LETTER HO", 0x31, "Half_And_Full_Forms"),
    c(0xFF8F, None, "HALFWIDTH KATAKANA LETTER MA", 0x31, "Half_And_Full_Forms"),
    c(0xFF90, None, "HALFWIDTH KATAKANA LETTER MI", 0x31, "Half_And_Full_Forms"),
    c(0xFF91, None, "HALFWIDTH KATAKANA LETTER MU", 0x31, "Half_And_Full_Forms"),
    c(0xFF92, None, "HALFWIDTH KATAKANA LETTER ME", 0x31, "Half_And_Full_Forms"),
    c(0xFF93, None, "HALFWIDTH KATAKANA LETTER MO", 0x31, "Half_And_Full_Forms"),
    c(0xFF94, None, "HALFWIDTH KATAKANA LETTER YA", 0x31, "Half_And_Full_Forms"),
    c(0xFF95, None, "HALFWIDTH KATAKANA LETTER YU", 0x31, "Half_And_Full_Forms"),
    c(0xFF96, None, "HALFWIDTH KATAKANA LETTER YO", 0x31, "Half_And_Full_Forms"),
    c(0xFF97, None, "HALFWIDTH KATAKANA LETTER RA", 0x31, "Half_And_Full_Forms"),
    c(0xFF98, None, "HALFWIDTH KATAKANA LETTER RI", 0x31, "Half_And_Full_Forms"),
    c(0xFF99, None, "HALFWIDTH KATAKANA LETTER RU", 0x31, "Half_And_Full_Forms"),
    c(0xFF9A, None, "HALFWIDTH KATAKANA LETTER RE", 0x31, "Half_And_Full_Forms"),
    c(0xFF9B, None, "HALFWIDTH KATAKANA LETTER RO", 0x31, "Half_And_Full_Forms"),
    c(0xFF9C, None, "HALFWIDTH KATAKANA LETTER WA", 0x31, "Half_And_Full_Forms"),
    c(0xFF9D, None, "HALFWIDTH KATAKANA LETTER N", 0x31, "Half_And_Full_Forms"),
    c(0xFF9E, None, "HALFWIDTH KATAKANA VOICED SOUND MARK", 0x21, "Half_And_Full_Forms"),
    c(0xFF9F, None, "HALFWIDTH KATAKANA SEMI-VOICED SOUND MARK", 0x21, "Half_And_Full_Forms"),
    c(0xFFA0, None, "HALFWIDTH HANGUL FILLER", 0x31, "Half_And_Full_Forms"),
    c(0xFFA1, None, "HALFWIDTH HANGUL LETTER KIYEOK", 0x31, "Half_And_Full_Forms"),
    c(0xFFA2, None, "HALFWIDTH HANGUL LETTER SSANGKIYEOK", 0x31, "Half_And_Full_Forms"),
    c(0xFFA3, None, "HALFWIDTH HANGUL LETTER KIYEOK-SIOS", 0x31, "Half_And_Full_Forms"),
    c(0xFFA4, None, "HALFWIDTH HANGUL LETTER NIEUN", 0x31, "Half_And_Full_Forms"),
    c(0xFFA5, None, "HALFWIDTH HANGUL LETTER NIEUN-CIEUC", 0x31, "Half_And_Full_Forms"),
    c(0xFFA6, None, "HALFWIDTH HANGUL LETTER NIEUN-HIEUH", 0x31, "Half_And_Full_Forms"),
    c(0xFFA7, None, "HALFWIDTH HANGUL LETTER TIKEUT", 0x31, "Half_And_Full_Forms"),
    c(0xFFA8, None, "HALFWIDTH HANGUL LETTER SSANGTIKEUT", 0x31, "Half_And_Full_Forms"),
    c(0xFFA9, None, "HALFWIDTH HANGUL LETTER RIEUL", 0x31, "Half_And_Full_Forms"),
    c(0xFFAA, None, "HALFWIDTH HANGUL LETTER RIEUL-KIYEOK", 0x31, "Half_And_Full_Forms"),
    c(0xFFAB, None, "HALFWIDTH HANGUL LETTER RIEUL-MIEUM", 0x31, "Half_And_Full_Forms"),
    c(0xFFAC, None, "HALFWIDTH HANGUL LETTER RIEUL-PIEUP", 0x31, "Half_And_Full_Forms"),
    c(0xFFAD, None, "HALFWIDTH HANGUL LETTER RIEUL-SIOS", 0x31, "Half_And_Full_Forms"),
    c(0xFFAE, None, "HALFWIDTH HANGUL LETTER RIEUL-THIEUTH", 0x31, "Half_And_Full_Forms"),
    c(0xFFAF, None, "HALFWIDTH HANGUL LETTER RIEUL-PHIEUPH", 0x31, "Half_And_Full_Forms"),
    c(0xFFB0, None, "HALFWIDTH HANGUL LETTER RIEUL-HIEUH", 0x31, "Half_And_Full_Forms"),
    c(0xFFB1, None, "HALFWIDTH HANGUL LETTER MIEUM", 0x31, "Half_And_Full_Forms"),
    c(0xFFB2, None, "HALFWIDTH HANGUL LETTER PIEUP", 0x31, "Half_And_Full_Forms"),
    c(0xFFB3, None, "HALFWIDTH HANGUL LETTER SSANGPIEUP", 0x31, "Half_And_Full_Forms"),
    c(0xFFB4, None, "HALFWIDTH HANGUL LETTER PIEUP-SIOS", 0x31, "Half_And_Full_Forms"),
    c(0xFFB5, None, "HALFWIDTH HANGUL LETTER SIOS", 0x31, "Half_And_Full_Forms"),
    c(0xFFB6, None, "HALFWIDTH HANGUL LETTER SSANGSIOS", 0x31, "Half_And_Full_Forms"),
    c(0xFFB7, None, "HALFWIDTH HANGUL LETTER IEUNG", 0x31, "Half_And_Full_Forms"),
    c(0xFFB8, None, "HALFWIDTH HANGUL LETTER CIEUC", 0x31, "Half_And_Full_Forms"),
    c(0xFFB9, None, "HALFWIDTH HANGUL LETTER SSANGCIEUC", 0x31, "Half_And_Full_Forms"),
    c(0xFFBA, None, "HALFWIDTH HANGUL LETTER CHIEUCH", 0x31, "Half_And_Full_Forms"),
    c(0xFFBB, None, "HALFWIDTH HANGUL LETTER KHIEUKH", 0x31, "Half_And_Full_Forms"),
    c(0xFFBC, None, "HALFWIDTH HANGUL LETTER THIEUTH", 0x31, "Half_And_Full_Forms"),
    c(0xFFBD, None, "HALFWIDTH HANGUL LETTER PHIEUPH", 0x31, "Half_And_Full_Forms"),
    c(0xFFBE, None, "HALFWIDTH HANGUL LETTER HIEUH", 0x31, "Half_And_Full_Forms"),
    c(0xFFC2, None, "HALFWIDTH HANGUL LETTER A", 0x31, "Half_And_Full_Forms"),
    c(0xFFC3, None, "HALFWIDTH HANGUL LETTER AE", 0x31, "Half_And_Full_Forms"),
    c(0xFFC4, None, "HALFWIDTH HANGUL LETTER YA", 0x31, "Half_And_Full_Forms"),
    c(0xFFC5, None, "HALFWIDTH HANGUL LETTER YAE", 0x31, "Half_And_Full_Forms"),
    c(0xFFC6, None, "HALFWIDTH HANGUL LETTER EO", 0x31, "Half_And_Full_Forms"),
    c(0xFFC7, None, "HALFWIDTH HANGUL LETTER E", 0x31, "Half_And_Full_Forms"),
    c(0xFFCA, None, "HALFWIDTH HANGUL LETTER YEO", 0x31, "Half_And_Full_Forms"),
    c(0xFFCB, None, "HALFWIDTH HANGUL LETTER YE", 0x31, "Half_And_Full_Forms"),
    c(0xFFCC, None, "HALFWIDTH HANGUL LETTER O", 0x31, "Half_And_Full_Forms"),
    c(0xFFCD, None, "HALFWIDTH HANGUL LETTER WA", 0x31, "Half_And_Full_Forms"),
    c(0xFFCE, None, "HALFWIDTH HANGUL LETTER WAE", 0x31, "Half_And_Full_Forms"),
    c(0xFFCF, None, "HALFWIDTH HANGUL LETTER OE", 0x31, "Half_And_Full_Forms"),
    c(0xFFD2, None, "HALFWIDTH HANGUL LETTER YO", 0x31, "Half_And_Full_Forms"),
    c(0xFFD3, None, "HALFWIDTH HANGUL LETTER U", 0x31, "Half_And_Full_Forms"),
    c(0xFFD4, None, "HALFWIDTH HANGUL LETTER WEO", 0x31, "Half_And_Full_Forms"),
    c(0xFFD5, None, "HALFWIDTH HANGUL LETTER WE", 0x31, "Half_And_Full_Forms"),
    c(0xFFD6, None, "HALFWIDTH HANGUL LETTER WI", 0x31, "Half_And_Full_Forms"),
    c(0xFFD7, None, "HALFWIDTH HANGUL LETTER YU", 0x31, "Half_And_Full_Forms"),
    c(0xFFDA, None, "HALFWIDTH HANGUL LETTER EU", 0x31, "Half_And_Full_Forms"),
    c(0xFFDB, None, "HALFWIDTH HANGUL LETTER YI", 0x31, "Half_And_Full_Forms"),
    c(0xFFDC, None, "HALFWIDTH HANGUL LETTER I", 0x31, "Half_And_Full_Forms"),
    c(0xFFE0, None, "FULLWIDTH CENT SIGN", 0x00, "Half_And_Full_Forms"),
    c(0xFFE1, None, "FULLWIDTH POUND SIGN", 0x00, "Half_And_Full_Forms"),
    c(0xFFE2, None, "FULLWIDTH NOT SIGN", 0x02, "Half_And_Full_Forms"),
    c(0xFFE3, None, "FULLWIDTH MACRON", 0x00, "Half_And_Full_Forms"),
    c(0xFFE4, None, "FULLWIDTH BROKEN BAR", 0x00, "Half_And_Full_Forms"),
    c(0xFFE5, None, "FULLWIDTH YEN SIGN", 0x00, "Half_And_Full_Forms"),
    c(0xFFE6, None, "FULLWIDTH WON SIGN", 0x00, "Half_And_Full_Forms"),
    c(0xFFE8, None, "HALFWIDTH FORMS LIGHT VERTICAL", 0x00, "Half_And_Full_Forms"),
    c(0xFFE9, None, "HALFWIDTH LEFTWARDS ARROW", 0x02, "Half_And_Full_Forms"),
    c(0xFFEA, None, "HALFWIDTH UPWARDS ARROW", 0x02, "Half_And_Full_Forms"),
    c(0xFFEB, None, "HALFWIDTH RIGHTWARDS ARROW", 0x02, "Half_And_Full_Forms"),
    c(0xFFEC, None, "HALFWIDTH DOWNWARDS ARROW", 0x02, "Half_And_Full_Forms"),
    c(0xFFED, None, "HALFWIDTH BLACK SQUARE", 0x00, "Half_And_Full_Forms"),
    c(0xFFEE, None, "HALFWIDTH WHITE CIRCLE", 0x00, "Half_And_Full_Forms"),
    c(0xFFF9, None, "INTERLINEAR ANNOTATION ANCHOR", 0x00, "Specials"),
    c(0xFFFA, None, "INTERLINEAR ANNOTATION SEPARATOR", 0x00, "Specials"),
    c(0xFFFB, None, "INTERLINEAR ANNOTATION TERMINATOR", 0x00, "Specials"),
    c(0xFFFC, None, "OBJECT REPLACEMENT CHARACTER", 0x00, "Specials"),
    c(0xFFFD, None, "REPLACEMENT CHARACTER", 0x00, "Specials"),
    c(0x10000, None, "LINEAR B SYLLABLE B008 A", 0x31, "Linear_B_Syllabary"),
    c(0x10001, None, "LINEAR B SYLLABLE B038 E", 0x31, "Linear_B_Syllabary"),
    c(0x10002, None, "LINEAR B SYLLABLE B028 I", 0x31, "Linear_B_Syllabary"),
    c(0x10003, None, "LINEAR B SYLLABLE B061 O", 0x31, "Linear_B_Syllabary"),
    c(0x10004, None, "LINEAR B SYLLABLE B010 U", 0x31, "Linear_B_Syllabary"),
    c(0x10005, None, "LINEAR B SYLLABLE B001 DA", 0x31, "Linear_B_Syllabary"),
    c(0x10006, None, "LINEAR B SYLLABLE B045 DE", 0x31, "Linear_B_Syllabary"),
    c(0x10007, None, "LINEAR B SYLLABLE B007 DI", 0x31, "Linear_B_Syllabary"),
    c(0x10008, None, "LINEAR B SYLLABLE B014 DO", 0x31, "Linear_B_Syllabary"),
    c(0x10009, None, "LINEAR B SYLLABLE B051 DU", 0x31, "Linear_B_Syllabary"),
    c(0x1000A, None, "LINEAR B SYLLABLE B057 JA", 0x31, "Linear_B_Syllabary"),
    c(0x1000B, None, "LINEAR B SYLLABLE B046 JE", 0x31, "Linear_B_Syllabary"),
    c(0x1000D, None, "LINEAR B SYLLABLE B036 JO", 0x31, "Linear_B_Syllabary"),
    c(0x1000E, None, "LINEAR B SYLLABLE B065 JU", 0x31, "Linear_B_Syllabary"),
    c(0x1000F, None, "LINEAR B SYLLABLE B077 KA", 0x31, "Linear_B_Syllabary"),
    c(0x10010, None, "LINEAR B SYLLABLE B044 KE", 0x31, "Linear_B_Syllabary"),
    c(0x10011, None, "LINEAR B SYLLABLE B067 KI", 0x31, "Linear_B_Syllabary"),
    c(0x10012, None, "LINEAR B SYLLABLE B070 KO", 0x31, "Linear_B_Syllabary"),
    c(0x10013, None, "LINEAR B SYLLABLE B081 KU", 0x31, "Linear_B_Syllabary"),
    c(0x10014, None, "LINEAR B SYLLABLE B080 MA", 0x31, "Linear_B_Syllabary"),
    c(0x10015, None, "LINEAR B SYLLABLE B013 ME", 0x31, "Linear_B_Syllabary"),
    c(0x10016, None, "LINEAR B SYLLABLE B073 MI", 0x31, "Linear_B_Syllabary"),
    c(0x10017, None, "LINEAR B SYLLABLE B015 MO", 0x31, "Linear_B_Syllabary"),
    c(0x10018, None, "LINEAR B SYLLABLE B023 MU", 0x31, "Linear_B_Syllabary"),
    c(0x10019, None, "LINEAR B SYLLABLE B006 NA", 0x31, "Linear_B_Syllabary"),
    c(0x1001A, None, "LINEAR B SYLLABLE B024 NE", 0x31, "Linear_B_Syllabary"),
    c(0x1001B, None, "LINEAR B SYLLABLE B030 NI", 0x31, "Linear_B_Syllabary"),
    c(0x1001C, None, "LINEAR B SYLLABLE B052 NO", 0x31, "Linear_B_Syllabary"),
    c(0x1001D, None, "LINEAR B SYLLABLE B055 NU", 0x31, "Linear_B_Syllabary"),
    c(0x1001E, None, "LINEAR B SYLLABLE B003 PA", 0x31, "Linear_B_Syllabary"),
    c(0x1001F, None, "LINEAR B SYLLABLE B072 PE", 0x31, "Linear_B_Syllabary"),
    c(0x10020, None, "LINEAR B SYLLABLE B039 PI", 0x31, "Linear_B_Syllabary"),
    c(0x10021, None, "LINEAR B SYLLABLE B011 PO", 0x31, "Linear_B_Syllabary"),
    c(0x10022, None, "LINEAR B SYLLABLE B050 PU", 0x31, "Linear_B_Syllabary"),
    c(0x10023, None, "LINEAR B SYLLABLE B016 QA", 0x31, "Linear_B_Syllabary"),
    c(0x10024, None, "LINEAR B SYLLABLE B078 QE", 0x31, "Linear_B_Syllabary"),
    c(0x10025, None, "LINEAR B SYLLABLE B021 QI", 0x31, "Linear_B_Syllabary"),
    c(0x10026, None, "LINEAR B SYLLABLE B032 QO", 0x31, "Linear_B_Syllabary"),
    c(0x10028, None, "LINEAR B SYLLABLE B060 RA", 0x31, "Linear_B_Syllabary"),
    c(0x10029, None, "LINEAR B SYLLABLE B027 RE", 0x31, "Linear_B_Syllabary"),
    c(0x1002A, None, "LINEAR B SYLLABLE B053 RI", 0x31, "Linear_B_Syllabary"),
    c(0x1002B, None, "LINEAR B SYLLABLE B002 RO", 0x31, "Linear_B_Syllabary"),
    c(0x1002C, None, "LINEAR B SYLLABLE B026 RU", 0x31, "Linear_B_Syllabary"),
    c(0x1002D, None, "LINEAR B SYLLABLE B031 SA", 0x31, "Linear_B_Syllabary"),
    c(0x1002E, None, "LINEAR B SYLLABLE B009 SE", 0x31, "Linear_B_Syllabary"),
    c(0x1002F, None, "LINEAR B SYLLABLE B041 SI", 0x31, "Linear_B_Syllabary"),
    c(0x10030, None, "LINEAR B SYLLABLE B012 SO", 0x31, "Linear_B_Syllabary"),
    c(0x10031, None, "LINEAR B SYLLABLE B058 SU", 0x31, "Linear_B_Syllabary"),
    c(0x10032, None, "LINEAR B SYLLABLE B059 TA", 0x31, "Linear_B_Syllabary"),
    c(0x10033, None, "LINEAR B SYLLABLE B004 TE", 0x31, "Linear_B_Syllabary"),
    c(0x10034, None, "LINEAR B SYLLABLE B037 TI", 0x31, "Linear_B_Syllabary"),
    c(0x10035, None, "LINEAR B SYLLABLE B005 TO", 0x31, "Linear_B_Syllabary"),
    c(0x10036, None, "LINEAR B SYLLABLE B069 TU", 0x31, "Linear_B_Syllabary"),
    c(0x10037, None, "LINEAR B SYLLABLE B054 WA", 0x31, "Linear_B_Syllabary"),
    c(0x10038, None, "LINEAR B SYLLABLE B075 WE", 0x31, "Linear_B_Syllabary"),
    c(0x10039, None, "LINEAR B SYLLABLE B040 WI", 0x31, "Linear_B_Syllabary"),
    c(0x1003A, None, "LINEAR B SYLLABLE B042 WO", 0x31, "Linear_B_Syllabary"),
    c(0x1003C, None, "LINEAR B SYLLABLE B017 ZA", 0x31, "Linear_B_Syllabary"),
    c(0x1003D, None, "LINEAR B SYLLABLE B074 ZE", 0x31, "Linear_B_Syllabary"),
    c(0x1003F, None, "LINEAR B SYLLABLE B020 ZO", 0x31, "Linear_B_Syllabary"),
    c(0x10040, None, "LINEAR B SYLLABLE B025 A2", 0x31, "Linear_B_Syllabary"),
    c(0x10041, None, "LINEAR B SYLLABLE B043 A3", 0x31, "Linear_B_Syllabary"),
    c(0x10042, None, "LINEAR B SYLLABLE B085 AU", 0x31, "Linear_B_Syllabary"),
    c(0x10043, None, "LINEAR B SYLLABLE B071 DWE", 0x31, "Linear_B_Syllabary"),
    c(0x10044, None, "LINEAR B SYLLABLE B090 DWO", 0x31, "Linear_B_Syllabary"),
    c(0x10045, None, "LINEAR B SYLLABLE B048 NWA", 0x31, "Linear_B_Syllabary"),
    c(0x10046, None, "LINEAR B SYLLABLE B029 PU2", 0x31, "Linear_B_Syllabary"),
    c(0x10047, None, "LINEAR B SYLLABLE B062 PTE", 0x31, "Linear_B_Syllabary"),
    c(0x10048, None, "LINEAR B SYLLABLE B076 RA2", 0x31, "Linear_B_Syllabary"),
    c(0x10049, None, "LINEAR B SYLLABLE B033 RA3", 0x31, "Linear_B_Syllabary"),
    c(0x1004A, None, "LINEAR B SYLLABLE B068 RO2", 0x31, "Linear_B_Syllabary"),
    c(0x1004B, None, "LINEAR B SYLLABLE B066 TA2", 0x31, "Linear_B_Syllabary"),
    c(0x1004C, None, "LINEAR B SYLLABLE B087 TWE", 0x31, "Linear_B_Syllabary"),
    c(0x1004D, None, "LINEAR B SYLLABLE B091 TWO", 0x31, "Linear_B_Syllabary"),
    c(0x10050, None, "LINEAR B SYMBOL B018", 0x31, "Linear_B_Syllabary"),
    c(0x10051, None, "LINEAR B SYMBOL B019", 0x31, "Linear_B_Syllabary"),
    c(0x10052, None, "LINEAR B SYMBOL B022", 0x31, "Linear_B_Syllabary"),
    c(0x10053, None, "LINEAR B SYMBOL B034", 0x31, "Linear_B_Syllabary"),
    c(0x10054, None, "LINEAR B SYMBOL B047", 0x31, "Linear_B_Syllabary"),
    c(0x10055, None, "LINEAR B SYMBOL B049", 0x31, "Linear_B_Syllabary"),
    c(0x10056, None, "LINEAR B SYMBOL B056", 0x31, "Linear_B_Syllabary"),
    c(0x10057, None, "LINEAR B SYMBOL B063", 0x31, "Linear_B_Syllabary"),
    c(0x10058, None, "LINEAR B SYMBOL B064", 0x31, "Linear_B_Syllabary"),
    c(0x10059, None, "LINEAR B SYMBOL B079", 0x31, "Linear_B_Syllabary"),
    c(0x1005A, None, "LINEAR B SYMBOL B082", 0x31, "Linear_B_Syllabary"),
    c(0x1005B, None, "LINEAR B SYMBOL B083", 0x31, "Linear_B_Syllabary"),
    c(0x1005C, None, "LINEAR B SYMBOL B086", 0x31, "Linear_B_Syllabary"),
    c(0x1005D, None, "LINEAR B SYMBOL B089", 0x31, "Linear_B_Syllabary"),
    c(0x10080, None, "LINEAR B IDEOGRAM B100 MAN", 0x31, "Linear_B_Ideograms"),
    c(0x10081, None, "LINEAR B IDEOGRAM B102 WOMAN", 0x31, "Linear_B_Ideograms"),
    c(0x10082, None, "LINEAR B IDEOGRAM B104 DEER", 0x31, "Linear_B_Ideograms"),
    c(0x10083, None, "LINEAR B IDEOGRAM B105 EQUID", 0x31, "Linear_B_Ideograms"),
    c(0x10084, None, "LINEAR B IDEOGRAM B105F MARE", 0x31, "Linear_B_Ideograms"),
    c(0x10085, None, "LINEAR B IDEOGRAM B105M STALLION", 0x31, "Linear_B_Ideograms"),
    c(0x10086, None, "LINEAR B IDEOGRAM B106F EWE", 0x31, "Linear_B_Ideograms"),
    c(0x10087, None, "LINEAR B IDEOGRAM B106M RAM", 0x31, "Linear_B_Ideograms"),
    c(0x10088, None, "LINEAR B IDEOGRAM B107F SHE-GOAT", 0x31, "Linear_B_Ideograms"),
    c(0x10089, None, "LINEAR B IDEOGRAM B107M HE-GOAT", 0x31, "Linear_B_Ideograms"),
    c(0x1008A, None, "LINEAR B IDEOGRAM B108F SOW", 0x31, "Linear_B_Ideograms"),
    c(0x1008B, None, "LINEAR B IDEOGRAM B108M BOAR", 0x31, "Linear_B_Ideograms"),
    c(0x1008C, None, "LINEAR B IDEOGRAM B109F COW", 0x31, "Linear_B_Ideograms"),
    c(0x1008D, None, "LINEAR B IDEOGRAM B109M BULL", 0x31, "Linear_B_Ideograms"),
    c(0x1008E, None, "LINEAR B IDEOGRAM B120 WHEAT", 0x31, "Linear_B_Ideograms"),
    c(0x1008F, None, "LINEAR B IDEOGRAM B121 BARLEY", 0x31, "Linear_B_Ideograms"),
    c(0x10090, None, "LINEAR B IDEOGRAM B122 OLIVE", 0x31, "Linear_B_Ideograms"),
    c(0x10091, None, "LINEAR B IDEOGRAM B123 SPICE", 0x31, "Linear_B_Ideograms"),
    c(0x10092, None, "LINEAR B IDEOGRAM B125 CYPERUS", 0x31, "Linear_B_Ideograms"),
    c(0x10093, None, "LINEAR B MONOGRAM B127 KAPO", 0x31, "Linear_B_Ideograms"),
    c(0x10094, None, "LINEAR B MONOGRAM B128 KANAKO", 0x31, "Linear_B_Ideograms"),
    c(0x10095, None, "LINEAR B IDEOGRAM B130 OIL", 0x31, "Linear_B_Ideograms"),
    c(0x10096, None, "LINEAR B IDEOGRAM B131 WINE", 0x31, "Linear_B_Ideograms"),
    c(0x10097, None, "LINEAR B IDEOGRAM B132", 0x31, "Linear_B_Ideograms"),
    c(0x10098, None, "LINEAR B MONOGRAM B133 AREPA", 0x31, "Linear_B_Ideograms"),
    c(0x10099, None, "LINEAR B MONOGRAM B135 MERI", 0x31, "Linear_B_Ideograms"),
    c(0x1009A, None, "LINEAR B IDEOGRAM B140 BRONZE", 0x31, "Linear_B_Ideograms"),
    c(0x1009B, None, "LINEAR B IDEOGRAM B141 GOLD", 0x31, "Linear_B_Ideograms"),
    c(0x1009C, None, "LINEAR B IDEOGRAM B142", 0x31, "Linear_B_Ideograms"),
    c(0x1009D, None, "LINEAR B IDEOGRAM B145 WOOL", 0x31, "Linear_B_Ideograms"),
    c(0x1009E, None, "LINEAR B IDEOGRAM B146", 0x31, "Linear_B_Ideograms"),
    c(0x1009F, None, "LINEAR B IDEOGRAM B150", 0x31, "Linear_B_Ideograms"),
    c(0x100A0, None, "LINEAR B IDEOGRAM B151 HORN", 0x31, "Linear_B_Ideograms"),
    c(0x100A1, None, "LINEAR B IDEOGRAM B152", 0x31, "Linear_B_Ideograms"),
    c(0x100A2, None, "LINEAR B IDEOGRAM B153", 0x31, "Linear_B_Ideograms"),
    c(0x100A3, None, "LINEAR B IDEOGRAM B154", 0x31, "Linear_B_Ideograms"),
    c(0x100A4, None, "LINEAR B MONOGRAM B156 TURO2", 0x31, "Linear_B_Ideograms"),
    c(0x100A5, None, "LINEAR B IDEOGRAM B157", 0x31, "Linear_B_Ideograms"),
    c(0x100A6, None, "LINEAR B IDEOGRAM B158", 0x31, "Linear_B_Ideograms"),
    c(0x100A7, None, "LINEAR B IDEOGRAM B159 CLOTH", 0x31, "Linear_B_Ideograms"),
    c(0x100A8, None, "LINEAR B IDEOGRAM B160", 0x31, "Linear_B_Ideograms"),
    c(0x100A9, None, "LINEAR B IDEOGRAM B161", 0x31, "Linear_B_Ideograms"),
    c(0x100AA, None, "LINEAR B IDEOGRAM B162 GARMENT", 0x31, "Linear_B_Ideograms"),
    c(0x100AB, None, "LINEAR B IDEOGRAM B163 ARMOUR", 0x31, "Linear_B_Ideograms"),
    c(0x100AC, None, "LINEAR B IDEOGRAM B164", 0x31, "Linear_B_Ideograms"),
    c(0x100AD, None, "LINEAR B IDEOGRAM B165", 0x31, "Linear_B_Ideograms"),
    c(0x100AE, None, "LINEAR B IDEOGRAM B166", 0x31, "Linear_B_Ideograms"),
    c(0x100AF, None, "LINEAR B IDEOGRAM B167", 0x31, "Linear_B_Ideograms"),
    c(0x100B0, None, "LINEAR B IDEOGRAM B168", 0x31, "Linear_B_Ideograms"),
    c(0x100B1, None, "LINEAR B IDEOGRAM B169", 0x31, "Linear_B_Ideograms"),
    c(0x100B2, None, "LINEAR B IDEOGRAM B170", 0x31, "Linear_B_Ideograms"),
    c(0x100B3, None, "LINEAR B IDEOGRAM B171", 0x31, "Linear_B_Ideograms"),
    c(0x100B4, None, "LINEAR B IDEOGRAM B172", 0x31, "Linear_B_Ideograms"),
    c(0x100B5, None, "LINEAR B IDEOGRAM B173 MONTH", 0x31, "Linear_B_Ideograms"),
    c(0x100B6, None, "LINEAR B IDEOGRAM B174", 0x31, "Linear_B_Ideograms"),
    c(0x100B7, None, "LINEAR B IDEOGRAM B176 TREE", 0x31, "Linear_B_Ideograms"),
    c(0x100B8, None, "LINEAR B IDEOGRAM B177", 0x31, "Linear_B_Ideograms"),
    c(0x100B9, None, "LINEAR B IDEOGRAM B178", 0x31, "Linear_B_Ideograms"),
    c(0x100BA, None, "LINEAR B IDEOGRAM B179", 0x31, "Linear_B_Ideograms"),
    c(0x100BB, None, "LINEAR B IDEOGRAM B180", 0x31, "Linear_B_Ideograms"),
    c(0x100BC, None, "LINEAR B IDEOGRAM B181", 0x31, "Linear_B_Ideograms"),
    c(0x100BD, None, "LINEAR B IDEOGRAM B182", 0x31, "Linear_B_Ideograms"),
    c(0x100BE, None, "LINEAR B IDEOGRAM B183", 0x31, "Linear_B_Ideograms"),
    c(0x100BF, None, "LINEAR B IDEOGRAM B184", 0x31, "Linear_B_Ideograms"),
    c(0x100C0, None, "LINEAR B IDEOGRAM B185", 0x31, "Linear_B_Ideograms"),
    c(0x100C1, None, "LINEAR B IDEOGRAM B189", 0x31, "Linear_B_Ideograms"),
    c(0x100C2, None, "LINEAR B IDEOGRAM B190", 0x31, "Linear_B_Ideograms"),
    c(0x100C3, None, "LINEAR B IDEOGRAM B191 HELMET", 0x31, "Linear_B_Ideograms"),
    c(0x100C4, None, "LINEAR B IDEOGRAM B220 FOOTSTOOL", 0x31, "Linear_B_Ideograms"),
    c(0x100C5, None, "LINEAR B IDEOGRAM B225 BATHTUB", 0x31, "Linear_B_Ideograms"),
    c(0x100C6, None, "LINEAR B IDEOGRAM B230 SPEAR", 0x31, "Linear_B_Ideograms"),
    c(0x100C7, None, "LINEAR B IDEOGRAM B231 ARROW", 0x31, "Linear_B_Ideograms"),
    c(0x100C8, None, "LINEAR B IDEOGRAM B232", 0x31, "Linear_B_Ideograms"),
    c(0x100C9, None, "LINEAR B IDEOGRAM B233 SWORD", 0x31, "Linear_B_Ideograms"),
    c(0x100CA, None, "LINEAR B IDEOGRAM B234", 0x31, "Linear_B_Ideograms"),
    c(0x100CB, None, "LINEAR B IDEOGRAM B236", 0x31, "Linear_B_Ideograms"),
    c(0x100CC, None, "LINEAR B IDEOGRAM B240 WHEELED CHARIOT", 0x31, "Linear_B_Ideograms"),
    c(0x100CD, None, "LINEAR B IDEOGRAM B241 CHARIOT", 0x31, "Linear_B_Ideograms"),
    c(0x100CE, None, "LINEAR B IDEOGRAM B242 CHARIOT FRAME", 0x31, "Linear_B_Ideograms"),
    c(0x100CF, None, "LINEAR B IDEOGRAM B243 WHEEL", 0x31, "Linear_B_Ideograms"),
    c(0x100D0, None, "LINEAR B IDEOGRAM B245", 0x31, "Linear_B_Ideograms"),
    c(0x100D1, None, "LINEAR B IDEOGRAM B246", 0x31, "Linear_B_Ideograms"),
    c(0x100D2, None, "LINEAR B MONOGRAM B247 DIPTE", 0x31, "Linear_B_Ideograms"),
    c(0x100D3, None, "LINEAR B IDEOGRAM B248", 0x31, "Linear_B_Ideograms"),
    c(0x100D4, None, "LINEAR B IDEOGRAM B249", 0x31, "Linear_B_Ideograms"),
    c(0x100D5, None, "LINEAR B IDEOGRAM B251", 0x31, "Linear_B_Ideograms"),
    c(0x100D6, None, "LINEAR B IDEOGRAM B252", 0x31, "Linear_B_Ideograms"),
    c(0x100D7, None, "LINEAR B IDEOGRAM B253", 0x31, "Linear_B_Ideograms"),
    c(0x100D8, None, "LINEAR B IDEOGRAM B254 DART", 0x31, "Linear_B_Ideograms"),
    c(0x100D9, None, "LINEAR B IDEOGRAM B255", 0x31, "Linear_B_Ideograms"),
    c(0x100DA, None, "LINEAR B IDEOGRAM B256", 0x31, "Linear_B_Ideograms"),
    c(0x100DB, None, "LINEAR B IDEOGRAM B257", 0x31, "Linear_B_Ideograms"),
    c(0x100DC, None, "LINEAR B IDEOGRAM B258", 0x31, "Linear_B_Ideograms"),
    c(0x100DD, None, "LINEAR B IDEOGRAM B259", 0x31, "Linear_B_Ideograms"),
    c(0x100DE, None, "LINEAR B IDEOGRAM VESSEL B155", 0x31, "Linear_B_Ideograms"),
    c(0x100DF, None, "LINEAR B IDEOGRAM VESSEL B200", 0x31, "Linear_B_Ideograms"),
    c(0x100E0, None, "LINEAR B IDEOGRAM VESSEL B201", 0x31, "Linear_B_Ideograms"),
    c(0x100E1, None, "LINEAR B IDEOGRAM VESSEL B202", 0x31, "Linear_B_Ideograms"),
    c(0x100E2, None, "LINEAR B IDEOGRAM VESSEL B203", 0x31, "Linear_B_Ideograms"),
    c(0x100E3, None, "LINEAR B IDEOGRAM VESSEL B204", 0x31, "Linear_B_Ideograms"),
    c(0x100E4, None, "LINEAR B IDEOGRAM VESSEL B205", 0x31, "Linear_B_Ideograms"),
    c(0x100E5, None, "LINEAR B IDEOGRAM VESSEL B206", 0x31, "Linear_B_Ideograms"),
    c(0x100E6, None, "LINEAR B IDEOGRAM VESSEL B207", 0x31, "Linear_B_Ideograms"),
    c(0x100E7, None, "LINEAR B IDEOGRAM VESSEL B208", 0x31, "Linear_B_Ideograms"),
    c(0x100E8, None, "LINEAR B IDEOGRAM VESSEL B209", 0x31, "Linear_B_Ideograms"),
    c(0x100E9, None, "LINEAR B IDEOGRAM VESSEL B210", 0x31, "Linear_B_Ideograms"),
    c(0x100EA, None, "LINEAR B IDEOGRAM VESSEL B211", 0x31, "Linear_B_Ideograms"),
    c(0x100EB, None, "LINEAR B IDEOGRAM VESSEL B212", 0x31, "Linear_B_Ideograms"),
    c(0x100EC, None, "LINEAR B IDEOGRAM VESSEL B213", 0x31, "Linear_B_Ideograms"),
    c(0x100ED, None, "LINEAR B IDEOGRAM VESSEL B214", 0x31, "Linear_B_Ideograms"),
    c(0x100EE, None, "LINEAR B IDEOGRAM VESSEL B215", 0x31, "Linear_B_Ideograms"),
    c(0x100EF, None, "LINEAR B IDEOGRAM VESSEL B216", 0x31, "Linear_B_Ideograms"),
    c(0x100F0, None, "LINEAR B IDEOGRAM VESSEL B217", 0x31, "Linear_B_Ideograms"),
    c(0x100F1, None, "LINEAR B IDEOGRAM VESSEL B218", 0x31, "Linear_B_Ideograms"),
    c(0x100F2, None, "LINEAR B IDEOGRAM VESSEL B219", 0x31, "Linear_B_Ideograms"),
    c(0x100F3, None, "LINEAR B IDEOGRAM VESSEL B221", 0x31, "Linear_B_Ideograms"),
    c(0x100F4, None, "LINEAR B IDEOGRAM VESSEL B222", 0x31, "Linear_B_Ideograms"),
    c(0x100F5, None, "LINEAR B IDEOGRAM VESSEL B226", 0x31, "Linear_B_Ideograms"),
    c(0x100F6, None, "LINEAR B IDEOGRAM VESSEL B227", 0x31, "Linear_B_Ideograms"),
    c(0x100F7, None, "LINEAR B IDEOGRAM VESSEL B228", 0x31, "Linear_B_Ideograms"),
    c(0x100F8, None, "LINEAR B IDEOGRAM VESSEL B229", 0x31, "Linear_B_Ideograms"),
    c(0x100F9, None, "LINEAR B IDEOGRAM VESSEL B250", 0x31, "Linear_B_Ideograms"),
    c(0x100FA, None, "LINEAR B IDEOGRAM VESSEL B305", 0x31, "Linear_B_Ideograms"),
    c(0x10100, None, "AEGEAN WORD SEPARATOR LINE", 0x00, "Aegean_Numbers"),
    c(0x10101, None, "AEGEAN WORD SEPARATOR DOT", 0x00, "Aegean_Numbers"),
    c(0x10102, None, "AEGEAN CHECK MARK", 0x00, "Aegean_Numbers"),
    c(0x10107, None, "AEGEAN NUMBER ONE", 0x00, "Aegean_Numbers"),
    c(0x10108, None, "AEGEAN NUMBER TWO", 0x00, "Aegean_Numbers"),
    c(0x10109, None, "AEGEAN NUMBER THREE", 0x00, "Aegean_Numbers"),
    c(0x1010A, None, "AEGEAN NUMBER FOUR", 0x00, "Aegean_Numbers"),
    c(0x1010B, None, "AEGEAN NUMBER FIVE", 0x00, "Aegean_Numbers"),
    c(0x1010C, None, "AEGEAN NUMBER SIX", 0x00, "Aegean_Numbers"),
    c(0x1010D, None, "AEGEAN NUMBER SEVEN", 0x00, "Aegean_Numbers"),
    c(0x1010E, None, "AEGEAN NUMBER EIGHT", 0x00, "Aegean_Numbers"),
    c(0x1010F, None, "AEGEAN NUMBER NINE", 0x00, "Aegean_Numbers"),
    c(0x10110, None, "AEGEAN NUMBER TEN", 0x00, "Aegean_Numbers"),
    c(0x10111, None, "AEGEAN NUMBER TWENTY", 0x00, "Aegean_Numbers"),
    c(0x10112, None, "AEGEAN NUMBER THIRTY", 0x00, "Aegean_Numbers"),
    c(0x10113, None, "AEGEAN NUMBER FORTY", 0x00, "Aegean_Numbers"),
    c(0x10114, None, "AEGEAN NUMBER FIFTY", 0x00, "Aegean_Numbers"),
    c(0x10115, None, "AEGEAN NUMBER SIXTY", 0x00, "Aegean_Numbers"),
    c(0x10116, None, "AEGEAN NUMBER SEVENTY", 0x00, "Aegean_Numbers"),
    c(0x10117, None, "AEGEAN NUMBER EIGHTY", 0x00, "Aegean_Numbers"),
    c(0x10118, None, "AEGEAN NUMBER NINETY", 0x00, "Aegean_Numbers"),
    c(0x10119, None, "AEGEAN NUMBER ONE HUNDRED", 0x00, "Aegean_Numbers"),
    c(0x1011A, None, "AEGEAN NUMBER TWO HUNDRED", 0x00, "Aegean_Numbers"),
    c(0x1011B, None, "AEGEAN NUMBER THREE HUNDRED", 0x00, "Aegean_Numbers"),
    c(0x1011C, None, "AEGEAN NUMBER FOUR HUNDRED", 0x00, "Aegean_Numbers"),
    c(0x1011D, None, "AEGEAN NUMBER FIVE HUNDRED", 0x00, "Aegean_Numbers"),
    c(0x1011E, None, "AEGEAN NUMBER SIX HUNDRED", 0x00, "Aegean_Numbers"),
    c(0x1011F, None, "AEGEAN NUMBER SEVEN HUNDRED", 0x00, "Aegean_Numbers"),
    c(0x10120, None, "AEGEAN NUMBER EIGHT HUNDRED", 0x00, "Aegean_Numbers"),
    c(0x10121, None, "AEGEAN NUMBER NINE HUNDRED", 0x00, "Aegean_Numbers"),
    c(0x10122, None, "AEGEAN NUMBER ONE THOUSAND", 0x00, "Aegean_Numbers"),
    c(0x10123, None, "AEGEAN NUMBER TWO THOUSAND", 0x00, "Aegean_Numbers"),
    c(0x10124, None, "AEGEAN NUMBER THREE THOUSAND", 0x00, "Aegean_Numbers"),
    c(0x10125, None, "AEGEAN NUMBER FOUR THOUSAND", 0x00, "Aegean_Numbers"),
    c(0x10126, None, "AEGEAN NUMBER FIVE THOUSAND", 0x00, "Aegean_Numbers"),
    c(0x10127, None, "AEGEAN NUMBER SIX THOUSAND", 0x00, "Aegean_Numbers"),
    c(0x10128, None, "AEGEAN NUMBER SEVEN THOUSAND", 0x00, "Aegean_Numbers"),
    c(0x10129, None, "AEGEAN NUMBER EIGHT THOUSAND", 0x00, "Aegean_Numbers"),
    c(0x1012A, None, "AEGEAN NUMBER NINE THOUSAND", 0x00, "Aegean_Numbers"),
    c(0x1012B, None, "AEGEAN NUMBER TEN THOUSAND", 0x00, "Aegean_Numbers"),
    c(0x1012C, None, "AEGEAN NUMBER TWENTY THOUSAND", 0x00, "Aegean_Numbers"),
    c(0x1012D, None, "AEGEAN NUMBER THIRTY THOUSAND", 0x00, "Aegean_Numbers"),
    c(0x1012E, None, "AEGEAN NUMBER FORTY THOUSAND", 0x00, "Aegean_Numbers"),
    c(0x1012F, None, "AEGEAN NUMBER FIFTY THOUSAND", 0x00, "Aegean_Numbers"),
    c(0x10130, None, "AEGEAN NUMBER SIXTY THOUSAND", 0x00, "Aegean_Numbers"),
    c(0x10131, None, "AEGEAN NUMBER SEVENTY THOUSAND", 0x00, "Aegean_Numbers"),
    c(0x10132, None, "AEGEAN NUMBER EIGHTY THOUSAND", 0x00, "Aegean_Numbers"),
    c(0x10133, None, "AEGEAN NUMBER NINETY THOUSAND", 0x00, "Aegean_Numbers"),
    c(0x10137, None, "AEGEAN WEIGHT BASE UNIT", 0x00, "Aegean_Numbers"),
    c(0x10138, None, "AEGEAN WEIGHT FIRST SUBUNIT", 0x00, "Aegean_Numbers"),
    c(0x10139, None, "AEGEAN WEIGHT SECOND SUBUNIT", 0x00, "Aegean_Numbers"),
    c(0x1013A, None, "AEGEAN WEIGHT THIRD SUBUNIT", 0x00, "Aegean_Numbers"),
    c(0x1013B, None, "AEGEAN WEIGHT FOURTH SUBUNIT", 0x00, "Aegean_Numbers"),
    c(0x1013C, None, "AEGEAN DRY MEASURE FIRST SUBUNIT", 0x00, "Aegean_Numbers"),
    c(0x1013D, None, "AEGEAN LIQUID MEASURE FIRST SUBUNIT", 0x00, "Aegean_Numbers"),
    c(0x1013E, None, "AEGEAN MEASURE SECOND SUBUNIT", 0x00, "Aegean_Numbers"),
    c(0x1013F, None, "AEGEAN MEASURE THIRD SUBUNIT", 0x00, "Aegean_Numbers"),
    c(0x10140, None, "GREEK ACROPHONIC ATTIC ONE QUARTER", 0x31, "Ancient_Greek_Numbers"),
    c(0x10141, None, "GREEK ACROPHONIC ATTIC ONE HALF", 0x31, "Ancient_Greek_Numbers"),
    c(0x10142, None, "GREEK ACROPHONIC ATTIC ONE DRACHMA", 0x31, "Ancient_Greek_Numbers"),
    c(0x10143, None, "GREEK ACROPHONIC ATTIC FIVE", 0x31, "Ancient_Greek_Numbers"),
    c(0x10144, None, "GREEK ACROPHONIC ATTIC FIFTY", 0x31, "Ancient_Greek_Numbers"),
    c(0x10145, None, "GREEK ACROPHONIC ATTIC FIVE HUNDRED", 0x31, "Ancient_Greek_Numbers"),
    c(0x10146, None, "GREEK ACROPHONIC ATTIC FIVE THOUSAND", 0x31, "Ancient_Greek_Numbers"),
    c(0x10147, None, "GREEK ACROPHONIC ATTIC FIFTY THOUSAND", 0x31, "Ancient_Greek_Numbers"),
    c(0x10148, None, "GREEK ACROPHONIC ATTIC FIVE TALENTS", 0x31, "Ancient_Greek_Numbers"),
    c(0x10149, None, "GREEK ACROPHONIC ATTIC TEN TALENTS", 0x31, "Ancient_Greek_Numbers"),
    c(0x1014A, None, "GREEK ACROPHONIC ATTIC FIFTY TALENTS", 0x31, "Ancient_Greek_Numbers"),
    c(0x1014B, None, "GREEK ACROPHONIC ATTIC ONE HUNDRED TALENTS", 0x31, "Ancient_Greek_Numbers"),
    c(0x1014C, None, "GREEK ACROPHONIC ATTIC FIVE HUNDRED TALENTS", 0x31, "Ancient_Greek_Numbers"),
    c(0x1014D, None, "GREEK ACROPHONIC ATTIC ONE THOUSAND TALENTS", 0x31, "Ancient_Greek_Numbers"),
    c(0x1014E, None, "GREEK ACROPHONIC ATTIC FIVE THOUSAND TALENTS", 0x31, "Ancient_Greek_Numbers"),
    c(0x1014F, None, "GREEK ACROPHONIC ATTIC FIVE STATERS", 0x31, "Ancient_Greek_Numbers"),
    c(0x10150, None, "GREEK ACROPHONIC ATTIC TEN STATERS", 0x31, "Ancient_Greek_Numbers"),
    c(0x10151, None, "GREEK ACROPHONIC ATTIC FIFTY STATERS", 0x31, "Ancient_Greek_Numbers"),
    c(0x10152, None, "GREEK ACROPHONIC ATTIC ONE HUNDRED STATERS", 0x31, "Ancient_Greek_Numbers"),
    c(0x10153, None, "GREEK ACROPHONIC ATTIC FIVE HUNDRED STATERS", 0x31, "Ancient_Greek_Numbers"),
    c(0x10154, None, "GREEK ACROPHONIC ATTIC ONE THOUSAND STATERS", 0x31, "Ancient_Greek_Numbers"),
    c(0x10155, None, "GREEK ACROPHONIC ATTIC TEN THOUSAND STATERS", 0x31, "Ancient_Greek_Numbers"),
    c(0x10156, None, "GREEK ACROPHONIC ATTIC FIFTY THOUSAND STATERS", 0x31, "Ancient_Greek_Numbers"),
    c(0x10157, None, "GREEK ACROPHONIC ATTIC TEN MNAS", 0x31, "Ancient_Greek_Numbers"),
    c(0x10158, None, "GREEK ACROPHONIC HERAEUM ONE PLETHRON", 0x31, "Ancient_Greek_Numbers"),
    c(0x10159, None, "GREEK ACROPHONIC THESPIAN ONE", 0x31, "Ancient_Greek_Numbers"),
    c(0x1015A, None, "GREEK ACROPHONIC HERMIONIAN ONE", 0x31, "Ancient_Greek_Numbers"),
    c(0x1015B, None, "GREEK ACROPHONIC EPIDAUREAN TWO", 0x31, "Ancient_Greek_Numbers"),
    c(0x1015C, None, "GREEK ACROPHONIC THESPIAN TWO", 0x31, "Ancient_Greek_Numbers"),
    c(0x1015D, None, "GREEK ACROPHONIC CYRENAIC TWO DRACHMAS", 0x31, "Ancient_Greek_Numbers"),
    c(0x1015E, None, "GREEK ACROPHONIC EPIDAUREAN TWO DRACHMAS", 0x31, "Ancient_Greek_Numbers"),
    c(0x1015F, None, "GREEK ACROPHONIC TROEZENIAN FIVE", 0x31, "Ancient_Greek_Numbers"),
    c(0x10160, None, "GREEK ACROPHONIC TROEZENIAN TEN", 0x31, "Ancient_Greek_Numbers"),
    c(0x10161, None, "GREEK ACROPHONIC TROEZENIAN TEN ALTERNATE FORM", 0x31, "Ancient_Greek_Numbers"),
    c(0x10162, None, "GREEK ACROPHONIC HERMIONIAN TEN", 0x31, "Ancient_Greek_Numbers"),
    c(0x10163, None, "GREEK ACROPHONIC MESSENIAN TEN", 0x31, "Ancient_Greek_Numbers"),
    c(0x10164, None, "GREEK ACROPHONIC THESPIAN TEN", 0x31, "Ancient_Greek_Numbers"),
    c(0x10165, None, "GREEK ACROPHONIC THESPIAN THIRTY", 0x31, "Ancient_Greek_Numbers"),
    c(0x10166, None, "GREEK ACROPHONIC TROEZENIAN FIFTY", 0x31, "Ancient_Greek_Numbers"),
    c(0x10167, None, "GREEK ACROPHONIC TROEZENIAN FIFTY ALTERNATE FORM", 0x31, "Ancient_Greek_Numbers"),
    c(0x10168, None, "GREEK ACROPHONIC HERMIONIAN FIFTY", 0x31, "Ancient_Greek_Numbers"),
    c(0x10169, None, "GREEK ACROPHONIC THESPIAN FIFTY", 0x31, "Ancient_Greek_Numbers"),
    c(0x1016A, None, "GREEK ACROPHONIC THESPIAN ONE HUNDRED", 0x31, "Ancient_Greek_Numbers"),
    c(0x1016B, None, "GREEK ACROPHONIC THESPIAN THREE HUNDRED", 0x31, "Ancient_Greek_Numbers"),
    c(0x1016C, None, "GREEK ACROPHONIC EPIDAUREAN FIVE HUNDRED", 0x31, "Ancient_Greek_Numbers"),
    c(0x1016D, None, "GREEK ACROPHONIC TROEZENIAN FIVE HUNDRED", 0x31, "Ancient_Greek_Numbers"),
    c(0x1016E, None, "GREEK ACROPHONIC THESPIAN FIVE HUNDRED", 0x31, "Ancient_Greek_Numbers"),
    c(0x1016F, None, "GREEK ACROPHONIC CARYSTIAN FIVE HUNDRED", 0x31, "Ancient_Greek_Numbers"),
    c(0x10170, None, "GREEK ACROPHONIC NAXIAN FIVE HUNDRED", 0x31, "Ancient_Greek_Numbers"),
    c(0x10171, None, "GREEK ACROPHONIC THESPIAN ONE THOUSAND", 0x31, "Ancient_Greek_Numbers"),
    c(0x10172, None, "GREEK ACROPHONIC THESPIAN FIVE THOUSAND", 0x31, "Ancient_Greek_Numbers"),
    c(0x10173, None, "GREEK ACROPHONIC DELPHIC FIVE MNAS", 0x31, "Ancient_Greek_Numbers"),
    c(0x10174, None, "GREEK ACROPHONIC STRATIAN FIFTY MNAS", 0x31, "Ancient_Greek_Numbers"),
    c(0x10175, None, "GREEK ONE HALF SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x10176, None, "GREEK ONE HALF SIGN ALTERNATE FORM", 0x00, "Ancient_Greek_Numbers"),
    c(0x10177, None, "GREEK TWO THIRDS SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x10178, None, "GREEK THREE QUARTERS SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x10179, None, "GREEK YEAR SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x1017A, None, "GREEK TALENT SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x1017B, None, "GREEK DRACHMA SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x1017C, None, "GREEK OBOL SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x1017D, None, "GREEK TWO OBOLS SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x1017E, None, "GREEK THREE OBOLS SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x1017F, None, "GREEK FOUR OBOLS SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x10180, None, "GREEK FIVE OBOLS SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x10181, None, "GREEK METRETES SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x10182, None, "GREEK KYATHOS BASE SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x10183, None, "GREEK LITRA SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x10184, None, "GREEK OUNKIA SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x10185, None, "GREEK XESTES SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x10186, None, "GREEK ARTABE SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x10187, None, "GREEK AROURA SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x10188, None, "GREEK GRAMMA SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x10189, None, "GREEK TRYBLION BASE SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x1018A, None, "GREEK ZERO SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x1018B, None, "GREEK ONE QUARTER SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x1018C, None, "GREEK SINUSOID SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x1018D, None, "GREEK INDICTION SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x1018E, None, "NOMISMA SIGN", 0x00, "Ancient_Greek_Numbers"),
    c(0x10190, None, "ROMAN SEXTANS SIGN", 0x00, "Ancient_Symbols"),
    c(0x10191, None, "ROMAN UNCIA SIGN", 0x00, "Ancient_Symbols"),
    c(0x10192, None, "ROMAN SEMUNCIA SIGN", 0x00, "Ancient_Symbols"),
    c(0x10193, None, "ROMAN SEXTULA SIGN", 0x00, "Ancient_Symbols"),
    c(0x10194, None, "ROMAN DIMIDIA SEXTULA SIGN", 0x00, "Ancient_Symbols"),
    c(0x10195, None, "ROMAN SILIQUA SIGN", 0x00, "Ancient_Symbols"),
    c(0x10196, None, "ROMAN DENARIUS SIGN", 0x00, "Ancient_Symbols"),
    c(0x10197, None, "ROMAN QUINARIUS SIGN", 0x00, "Ancient_Symbols"),
    c(0x10198, None, "ROMAN SESTERTIUS SIGN", 0x00, "Ancient_Symbols"),
    c(0x10199, None, "ROMAN DUPONDIUS SIGN", 0x00, "Ancient_Symbols"),
    c(0x1019A, None, "ROMAN AS SIGN", 0x00, "Ancient_Symbols"),
    c(0x1019B, None, "ROMAN CENTURIAL SIGN", 0x00, "Ancient_Symbols"),
    c(0x1019C, None, "ASCIA SYMBOL", 0x00, "Ancient_Symbols"),
    c(0x101A0, None, "GREEK SYMBOL TAU RHO", 0x00, "Ancient_Symbols"),
    c(0x101D0, None, "PHAISTOS DISC SIGN PEDESTRIAN", 0x00, "Phaistos"),
    c(0x101D1, None, "PHAISTOS DISC SIGN PLUMED HEAD", 0x00, "Phaistos"),
    c(0x101D2, None, "PHAISTOS DISC SIGN TATTOOED HEAD", 0x00, "Phaistos"),
    c(0x101D3, None, "PHAISTOS DISC SIGN CAPTIVE", 0x00, "Phaistos"),
    c(0x101D4, None, "PHAISTOS DISC SIGN CHILD", 0x00, "Phaistos"),
    c(0x101D5, None, "PHAISTOS DISC SIGN WOMAN", 0x00, "Phaistos"),
    c(0x101D6, None, "PHAISTOS DISC SIGN HELMET", 0x00, "Phaistos"),
    c(0x101D7, None, "PHAISTOS DISC SIGN GAUNTLET", 0x00, "Phaistos"),
    c(0x101D8, None, "PHAISTOS DISC SIGN TIARA", 0x00, "Phaistos"),
    c(0x101D9, None, "PHAISTOS DISC SIGN ARROW", 0x00, "Phaistos"),
    c(0x101DA, None, "PHAISTOS DISC SIGN BOW", 0x00, "Phaistos"),
    c(0x101DB, None, "PHAISTOS DISC SIGN SHIELD", 0x00, "Phaistos"),
    c(0x101DC, None, "PHAISTOS DISC SIGN CLUB", 0x00, "Phaistos"),
    c(0x101DD, None, "PHAISTOS DISC SIGN MANACLES", 0x00, "Phaistos"),
    c(0x101DE, None, "PHAISTOS DISC SIGN MATTOCK", 0x00, "Phaistos"),
    c(0x101DF, None, "PHAISTOS DISC SIGN SAW", 0x00, "Phaistos"),
    c(0x101E0, None, "PHAISTOS DISC SIGN LID", 0x00, "Phaistos"),
    c(0x101E1, None, "PHAISTOS DISC SIGN BOOMERANG", 0x00, "Phaistos"),
    c(0x101E2, None, "PHAISTOS DISC SIGN CARPENTRY PLANE", 0x00, "Phaistos"),
    c(0x101E3, None, "PHAISTOS DISC SIGN DOLIUM", 0x00, "Phaistos"),
    c(0x101E4, None, "PHAISTOS DISC SIGN COMB", 0x00, "Phaistos"),
    c(0x101E5, None, "PHAISTOS DISC SIGN SLING", 0x00, "Phaistos"),
    c(0x101E6, None, "PHAISTOS DISC SIGN COLUMN", 0x00, "Phaistos"),
    c(0x101E7, None, "PHAISTOS DISC SIGN BEEHIVE", 0x00, "Phaistos"),
    c(0x101E8, None, "PHAISTOS DISC SIGN SHIP", 0x00, "Phaistos"),
    c(0x101E9, None, "PHAISTOS DISC SIGN HORN", 0x00, "Phaistos"),
    c(0x101EA, None, "PHAISTOS DISC SIGN HIDE", 0x00, "Phaistos"),
    c(0x101EB, None, "PHAISTOS DISC SIGN BULLS LEG", 0x00, "Phaistos"),
    c(0x101EC, None, "PHAISTOS DISC SIGN CAT", 0x00, "Phaistos"),
    c(0x101ED, None, "PHAISTOS DISC SIGN RAM", 0x00, "Phaistos"),
    c(0x101EE, None, "PHAISTOS DISC SIGN EAGLE", 0x00, "Phaistos"),
    c(0x101EF, None, "PHAISTOS DISC SIGN DOVE", 0x00, "Phaistos"),
    c(0x101F0, None, "PHAISTOS DISC SIGN TUNNY", 0x00, "Phaistos"),
    c(0x101F1, None, "PHAISTOS DISC SIGN BEE", 0x00, "Phaistos"),
    c(0x101F2, None, "PHAISTOS DISC SIGN PLANE TREE", 0x00, "Phaistos"),
    c(0x101F3, None, "PHAISTOS DISC SIGN VINE", 0x00, "Phaistos"),
    c(0x101F4, None, "PHAISTOS DISC SIGN PAPYRUS", 0x00, "Phaistos"),
    c(0x101F5, None, "PHAISTOS DISC SIGN ROSETTE", 0x00, "Phaistos"),
    c(0x101F6, None, "PHAISTOS DISC SIGN LILY", 0x00, "Phaistos"),
    c(0x101F7, None, "PHAISTOS DISC SIGN OX BACK", 0x00, "Phaistos"),
    c(0x101F8, None, "PHAISTOS DISC SIGN FLUTE", 0x00, "Phaistos"),
    c(0x101F9, None, "PHAISTOS DISC SIGN GRATER", 0x00, "Phaistos"),
    c(0x101FA, None, "PHAISTOS DISC SIGN STRAINER", 0x00, "Phaistos"),
    c(0x101FB, None, "PHAISTOS DISC SIGN SMALL AXE", 0x00, "Phaistos"),
    c(0x101FC, None, "PHAISTOS DISC SIGN WAVY BAND", 0x00, "Phaistos"),
    c(0x101FD, None, "PHAISTOS DISC SIGN COMBINING OBLIQUE STROKE", 0x20, "Phaistos"),
    c(0x10280, None, "LYCIAN LETTER A", 0x31, "Lycian"),
    c(0x10281, None, "LYCIAN LETTER E", 0x31, "Lycian"),
    c(0x10282, None, "LYCIAN LETTER B", 0x31, "Lycian"),
    c(0x10283, None, "LYCIAN LETTER BH", 0x31, "Lycian"),
    c(0x10284, None, "LYCIAN LETTER G", 0x31, "Lycian"),
    c(0x10285, None, "LYCIAN LETTER D", 0x31, "Lycian"),
    c(0x10286, None, "LYCIAN LETTER I", 0x31, "Lycian"),
    c(0x10287, None, "LYCIAN LETTER W", 0x31, "Lycian"),
    c(0x10288, None, "LYCIAN LETTER Z", 0x31, "Lycian"),
    c(0x10289, None, "LYCIAN LETTER TH", 0x31, "Lycian"),
    c(0x1028A, None, "LYCIAN LETTER J", 0x31, "Lycian"),
    c(0x1028B, None, "LYCIAN LETTER K", 0x31, "Lycian"),
    c(0x1028C, None, "LYCIAN LETTER Q", 0x31, "Lycian"),
    c(0x1028D, None, "LYCIAN LETTER L", 0x31, "Lycian"),
    c(0x1028E, None, "LYCIAN LETTER M", 0x31, "Lycian"),
    c(0x1028F, None, "LYCIAN LETTER N", 0x31, "Lycian"),
    c(0x10290, None, "LYCIAN LETTER MM", 0x31, "Lycian"),
    c(0x10291, None, "LYCIAN LETTER NN", 0x31, "Lycian"),
    c(0x10292, None, "LYCIAN LETTER U", 0x31, "Lycian"),
    c(0x10293, None, "LYCIAN LETTER P", 0x31, "Lycian"),
    c(0x10294, None, "LYCIAN LETTER KK", 0x31, "Lycian"),
    c(0x10295, None, "LYCIAN LETTER R", 0x31, "Lycian"),
    c(0x10296, None, "LYCIAN LETTER S", 0x31, "Lycian"),
    c(0x10297, None, "LYCIAN LETTER T", 0x31, "Lycian"),
    c(0x10298, None, "LYCIAN LETTER TT", 0x31, "Lycian"),
    c(0x10299, None, "LYCIAN LETTER AN", 0x31, "Lycian"),
    c(0x1029A, None, "LYCIAN LETTER EN", 0x31, "Lycian"),
    c(0x1029B, None, "LYCIAN LETTER H", 0x31, "Lycian"),
    c(0x1029C, None, "LYCIAN LETTER X", 0x31, "Lycian"),
    c(0x102A0, None, "CARIAN LETTER A", 0x31, "Carian"),
    c(0x102A1, None, "CARIAN LETTER P2", 0x31, "Carian"),
    c(0x102A2, None, "CARIAN LETTER D", 0x31, "Carian"),
    c(0x102A3, None, "CARIAN LETTER L", 0x31, "Carian"),
    c(0x102A4, None, "CARIAN LETTER UUU", 0x31, "Carian"),
    c(0x102A5, None, "CARIAN LETTER R", 0x31, "Carian"),
    c(0x102A6, None, "CARIAN LETTER LD", 0x31, "Carian"),
    c(0x102A7, None, "CARIAN LETTER A2", 0x31, "Carian"),
    c(0x102A8, None, "CARIAN LETTER Q", 0x31, "Carian"),
    c(0x102A9, None, "CARIAN LETTER B", 0x31, "Carian"),
    c(0x102AA, None, "CARIAN LETTER M", 0x31, "Carian"),
    c(0x102AB, None, "CARIAN LETTER O", 0x31, "Carian"),
    c(0x102AC, None, "CARIAN LETTER D2", 0x31, "Carian"),
    c(0x102AD, None, "CARIAN LETTER T", 0x31, "Carian"),
    c(0x102AE, None, "CARIAN LETTER SH", 0x31, "Carian"),
    c(0x102AF, None, "CARIAN LETTER SH2", 0x31, "Carian"),
    c(0x102B0, None, "CARIAN LETTER S", 0x31, "Carian"),
    c(0x102B1, None, "CARIAN LETTER C-18", 0x31, "Carian"),
    c(0x102B2, None, "CARIAN LETTER U", 0x31, "Carian"),
    c(0x102B3, None, "CARIAN LETTER NN", 0x31, "Carian"),
    c(0x102B4, None, "CARIAN LETTER X", 0x31, "Carian"),
    c(0x102B5, None, "CARIAN LETTER N", 0x31, "Carian"),
    c(0x102B6, None, "CARIAN LETTER TT2", 0x31, "Carian"),
    c(0x102B7, None, "CARIAN LETTER P", 0x31, "Carian"),
    c(0x102B8, None, "CARIAN LETTER SS", 0x31, "Carian"),
    c(0x102B9, None, "CARIAN LETTER I", 0x31, "Carian"),
    c(0x102BA, None, "CARIAN LETTER E", 0x31, "Carian"),
    c(0x102BB, None, "CARIAN LETTER UUUU", 0x31, "Carian"),
    c(0x102BC, None, "CARIAN LETTER K", 0x31, "Carian"),
    c(0x102BD, None, "CARIAN LETTER K2", 0x31, "Carian"),
    c(0x102BE, None, "CARIAN LETTER ND", 0x31, "Carian"),
    c(0x102BF, None, "CARIAN LETTER UU", 0x31, "Carian"),
    c(0x102C0, None, "CARIAN LETTER G", 0x31, "Carian"),
    c(0x102C1, None, "CARIAN LETTER G2", 0x31, "Carian"),
    c(0x102C2, None, "CARIAN LETTER ST", 0x31, "Carian"),
    c(0x102C3, None, "CARIAN LETTER ST2", 0x31, "Carian"),
    c(0x102C4, None, "CARIAN LETTER NG", 0x31, "Carian"),
    c(0x102C5, None, "CARIAN LETTER II", 0x31, "Carian"),
    c(0x102C6, None, "CARIAN LETTER C-39", 0x31, "Carian"),
    c(0x102C7, None, "CARIAN LETTER TT", 0x31, "Carian"),
    c(0x102C8, None, "CARIAN LETTER UUU2", 0x31, "Carian"),
    c(0x102C9, None, "CARIAN LETTER RR", 0x31, "Carian"),
    c(0x102CA, None, "CARIAN LETTER MB", 0x31, "Carian"),
    c(0x102CB, None, "CARIAN LETTER MB2", 0x31, "Carian"),
    c(0x102CC, None, "CARIAN LETTER MB3", 0x31, "Carian"),
    c(0x102CD, None, "CARIAN LETTER MB4", 0x31, "Carian"),
    c(0x102CE, None, "CARIAN LETTER LD2", 0x31, "Carian"),
    c(0x102CF, None, "CARIAN LETTER E2", 0x31, "Carian"),
    c(0x102D0, None, "CARIAN LETTER UUU3", 0x31, "Carian"),
    c(0x102E0, None, "COPTIC EPACT THOUSANDS MARK", 0x20, "Coptic_Epact_Numbers"),
    c(0x102E1, None, "COPTIC EPACT DIGIT ONE", 0x00, "Coptic_Epact_Numbers"),
    c(0x102E2, None, "COPTIC EPACT DIGIT TWO", 0x00, "Coptic_Epact_Numbers"),
    c(0x102E3, None, "COPTIC EPACT DIGIT THREE", 0x00, "Coptic_Epact_Numbers"),
    c(0x102E4, None, "COPTIC EPACT DIGIT FOUR", 0x00, "Coptic_Epact_Numbers"),
    c(0x102E5, None, "COPTIC EPACT DIGIT FIVE", 0x00, "Coptic_Epact_Numbers"),
    c(0x102E6, None, "COPTIC EPACT DIGIT SIX", 0x00, "Coptic_Epact_Numbers"),
    c(0x102E7, None, "COPTIC EPACT DIGIT SEVEN", 0x00, "Coptic_Epact_Numbers"),
    c(0x102E8, None, "COPTIC EPACT DIGIT EIGHT", 0x00, "Coptic_Epact_Numbers"),
    c(0x102E9, None, "COPTIC EPACT DIGIT NINE", 0x00, "Coptic_Epact_Numbers"),
    c(0x102EA, None, "COPTIC EPACT NUMBER TEN", 0x00, "Coptic_Epact_Numbers"),
    c(0x102EB, None, "COPTIC EPACT NUMBER TWENTY", 0x00, "Coptic_Epact_Numbers"),
    c(0x102EC, None, "COPTIC EPACT NUMBER THIRTY", 0x00, "Coptic_Epact_Numbers"),
    c(0x102ED, None, "COPTIC EPACT NUMBER FORTY", 0x00, "Coptic_Epact_Numbers"),
    c(0x102EE, None, "COPTIC EPACT NUMBER FIFTY", 0x00, "Coptic_Epact_Numbers"),
    c(0x102EF, None, "COPTIC EPACT NUMBER SIXTY", 0x00, "Coptic_Epact_Numbers"),
    c(0x102F0, None, "COPTIC EPACT NUMBER SEVENTY", 0x00, "Coptic_Epact_Numbers"),
    c(0x102F1, None, "COPTIC EPACT NUMBER EIGHTY", 0x00, "Coptic_Epact_Numbers"),
    c(0x102F2, None, "COPTIC EPACT NUMBER NINETY", 0x00, "Coptic_Epact_Numbers"),
    c(0x102F3, None, "COPTIC EPACT NUMBER ONE HUNDRED", 0x00, "Coptic_Epact_Numbers"),
    c(0x102F4, None, "COPTIC EPACT NUMBER TWO HUNDRED", 0x00, "Coptic_Epact_Numbers"),
    c(0x102F5, None, "COPTIC EPACT NUMBER THREE HUNDRED", 0x00, "Coptic_Epact_Numbers"),
    c(0x102F6, None, "COPTIC EPACT NUMBER FOUR HUNDRED", 0x00, "Coptic_Epact_Numbers"),
    c(0x102F7, None, "COPTIC EPACT NUMBER FIVE HUNDRED", 0x00, "Coptic_Epact_Numbers"),
    c(0x102F8, None, "COPTIC EPACT NUMBER SIX HUNDRED", 0x00, "Coptic_Epact_Numbers"),
    c(0x102F9, None, "COPTIC EPACT NUMBER SEVEN HUNDRED", 0x00, "Coptic_Epact_Numbers"),
    c(0x102FA, None, "COPTIC EPACT NUMBER EIGHT HUNDRED", 0x00, "Coptic_Epact_Numbers"),
    c(0x102FB, None, "COPTIC EPACT NUMBER NINE HUNDRED", 0x00, "Coptic_Epact_Numbers"),
    c(0x10300, None, "OLD ITALIC LETTER A", 0x31, "Old_Italic"),
    c(0x10301, None, "OLD ITALIC LETTER BE", 0x31, "Old_Italic"),
    c(0x10302, None, "OLD ITALIC LETTER KE", 0x31, "Old_Italic"),
    c(0x10303, None, "OLD ITALIC LETTER DE", 0x31, "Old_Italic"),
    c(0x10304, None, "OLD ITALIC LETTER E", 0x31, "Old_Italic"),
    c(0x10305, None, "OLD ITALIC LETTER VE", 0x31, "Old_Italic"),
    c(0x10306, None, "OLD ITALIC LETTER ZE", 0x31, "Old_Italic"),
    c(0x10307, None, "OLD ITALIC LETTER HE", 0x31, "Old_Italic"),
    c(0x10308, None, "OLD ITALIC LETTER THE", 0x31, "Old_Italic"),
    c(0x10309, None, "OLD ITALIC LETTER I", 0x31, "Old_Italic"),
    c(0x1030A, None, "OLD ITALIC LETTER KA", 0x31, "Old_Italic"),
    c(0x1030B, None, "OLD ITALIC LETTER EL", 0x31, "Old_Italic"),
    c(0x1030C, None, "OLD ITALIC LETTER EM", 0x31, "Old_Italic"),
    c(0x1030D, None, "OLD ITALIC LETTER EN", 0x31, "Old_Italic"),
    c(0x1030E, None, "OLD ITALIC LETTER ESH", 0x31, "Old_Italic"),
    c(0x1030F, None, "OLD ITALIC LETTER O", 0x31, "Old_Italic"),
    c(0x10310, None, "OLD ITALIC LETTER PE", 0x31, "Old_Italic"),
    c(0x10311, None, "OLD ITALIC LETTER SHE", 0x31, "Old_Italic"),
    c(0x10312, None, "OLD ITALIC LETTER KU", 0x31, "Old_Italic"),
    c(0x10313, None, "OLD ITALIC LETTER ER", 0x31, "Old_Italic"),
    c(0x10314, None, "OLD ITALIC LETTER ES", 0x31, "Old_Italic"),
    c(0x10315, None, "OLD ITALIC LETTER TE", 0x31, "Old_Italic"),
    c(0x10316, None, "OLD ITALIC LETTER U", 0x31, "Old_Italic"),
    c(0x10317, None, "OLD ITALIC LETTER EKS", 0x31, "Old_Italic"),
    c(0x10318, None, "OLD ITALIC LETTER PHE", 0x31, "Old_Italic"),
    c(0x10319, None, "OLD ITALIC LETTER KHE", 0x31, "Old_Italic"),
    c(0x1031A, None, "OLD ITALIC LETTER EF", 0x31, "Old_Italic"),
    c(0x1031B, None, "OLD ITALIC LETTER ERS", 0x31, "Old_Italic"),
    c(0x1031C, None, "OLD ITALIC LETTER CHE", 0x31, "Old_Italic"),
    c(0x1031D, None, "OLD ITALIC LETTER II", 0x31, "Old_Italic"),
    c(0x1031E, None, "OLD ITALIC LETTER UU", 0x31, "Old_Italic"),
    c(0x1031F, None, "OLD ITALIC LETTER ESS", 0x31, "Old_Italic"),
    c(0x10320, None, "OLD ITALIC NUMERAL ONE", 0x00, "Old_Italic"),
    c(0x10321, None, "OLD ITALIC NUMERAL FIVE", 0x00, "Old_Italic"),
    c(0x10322, None, "OLD ITALIC NUMERAL TEN", 0x00, "Old_Italic"),
    c(0x10323, None, "OLD ITALIC NUMERAL FIFTY", 0x00, "Old_Italic"),
    c(0x1032D, None, "OLD ITALIC LETTER YE", 0x31, "Old_Italic"),
    c(0x1032E, None, "OLD ITALIC LETTER NORTHERN TSE", 0x31, "Old_Italic"),
    c(0x1032F, None, "OLD ITALIC LETTER SOUTHERN TSE", 0x31, "Old_Italic"),
    c(0x10330, None, "GOTHIC LETTER AHSA", 0x31, "Gothic"),
    c(0x10331, None, "GOTHIC LETTER BAIRKAN", 0x31, "Gothic"),
    c(0x10332, None, "GOTHIC LETTER GIBA", 0x31, "Gothic"),
    c(0x10333, None, "GOTHIC LETTER DAGS", 0x31, "Gothic"),
    c(0x10334, None, "GOTHIC LETTER AIHVUS", 0x31, "Gothic"),
    c(0x10335, None, "GOTHIC LETTER QAIRTHRA", 0x31, "Gothic"),
    c(0x10336, None, "GOTHIC LETTER IUJA", 0x31, "Gothic"),
    c(0x10337, None, "GOTHIC LETTER HAGL", 0x31, "Gothic"),
    c(0x10338, None, "GOTHIC LETTER THIUTH", 0x31, "Gothic"),
    c(0x10339, None, "GOTHIC LETTER EIS", 0x31, "Gothic"),
    c(0x1033A, None, "GOTHIC LETTER KUSMA", 0x31, "Gothic"),
    c(0x1033B, None, "GOTHIC LETTER LAGUS", 0x31, "Gothic"),
    c(0x1033C, None, "GOTHIC LETTER MANNA", 0x31, "Gothic"),
    c(0x1033D, None, "GOTHIC LETTER NAUTHS", 0x31, "Gothic"),
    c(0x1033E, None, "GOTHIC LETTER JER", 0x31, "Gothic"),
    c(0x1033F, None, "GOTHIC LETTER URUS", 0x31, "Gothic"),
    c(0x10340, None, "GOTHIC LETTER PAIRTHRA", 0x31, "Gothic"),
    c(0x10341, None, "GOTHIC LETTER NINETY", 0x31, "Gothic"),
    c(0x10342, None, "GOTHIC LETTER RAIDA", 0x31, "Gothic"),
    c(0x10343, None, "GOTHIC LETTER SAUIL", 0x31, "Gothic"),
    c(0x10344, None, "GOTHIC LETTER TEIWS", 0x31, "Gothic"),
    c(0x10345, None, "GOTHIC LETTER WINJA", 0x31, "Gothic"),
    c(0x10346, None, "GOTHIC LETTER FAIHU", 0x31, "Gothic"),
    c(0x10347, None, "GOTHIC LETTER IGGWS", 0x31, "Gothic"),
    c(0x10348, None, "GOTHIC LETTER HWAIR", 0x31, "Gothic"),
    c(0x10349, None, "GOTHIC LETTER OTHAL", 0x31, "Gothic"),
    c(0x1034A, None, "GOTHIC LETTER NINE HUNDRED", 0x31, "Gothic"),
    c(0x10350, None, "OLD PERMIC LETTER AN", 0x31, "Old_Permic"),
    c(0x10351, None, "OLD PERMIC LETTER BUR", 0x31, "Old_Permic"),
    c(0x10352, None, "OLD PERMIC LETTER GAI", 0x31, "Old_Permic"),
    c(0x10353, None, "OLD PERMIC LETTER DOI", 0x31, "Old_Permic"),
    c(0x10354, None, "OLD PERMIC LETTER E", 0x31, "Old_Permic"),
    c(0x10355, None, "OLD PERMIC LETTER ZHOI", 0x31, "Old_Permic"),
    c(0x10356, None, "OLD PERMIC LETTER DZHOI", 0x31, "Old_Permic"),
    c(0x10357, None, "OLD PERMIC LETTER ZATA", 0x31, "Old_Permic"),
    c(0x10358, None, "OLD PERMIC LETTER DZITA", 0x31, "Old_Permic"),
    c(0x10359, None, "OLD PERMIC LETTER I", 0x31, "Old_Permic"),
    c(0x1035A, None, "OLD PERMIC LETTER KOKE", 0x31, "Old_Permic"),
    c(0x1035B, None, "OLD PERMIC LETTER LEI", 0x31, "Old_Permic"),
    c(0x1035C, None, "OLD PERMIC LETTER MENOE", 0x31, "Old_Permic"),
    c(0x1035D, None, "OLD PERMIC LETTER NENOE", 0x31, "Old_Permic"),
    c(0x1035E, None, "OLD PERMIC LETTER VOOI", 0x31, "Old_Permic"),
    c(0x1035F, None, "OLD PERMIC LETTER PEEI", 0x31, "Old_Permic"),
    c(0x10360, None, "OLD PERMIC LETTER REI", 0x31, "Old_Permic"),
    c(0x10361, None, "OLD PERMIC LETTER SII", 0x31, "Old_Permic"),
    c(0x10362, None, "OLD PERMIC LETTER TAI", 0x31, "Old_Permic"),
    c(0x10363, None, "OLD PERMIC LETTER U", 0x31, "Old_Permic"),
    c(0x10364, None, "OLD PERMIC LETTER CHERY", 0x31, "Old_Permic"),
    c(0x10365, None, "OLD PERMIC LETTER SHOOI", 0x31, "Old_Permic"),
    c(0x10366, None, "OLD PERMIC LETTER SHCHOOI", 0x31, "Old_Permic"),
    c(0x10367, None, "OLD PERMIC LETTER YRY", 0x31, "Old_Permic"),
    c(0x10368, None, "OLD PERMIC LETTER YERU", 0x31, "Old_Permic"),
    c(0x10369, None, "OLD PERMIC LETTER O", 0x31, "Old_Permic"),
    c(0x1036A, None, "OLD PERMIC LETTER OO", 0x31, "Old_Permic"),
    c(0x1036B, None, "OLD PERMIC LETTER EF", 0x31, "Old_Permic"),
    c(0x1036C, None, "OLD PERMIC LETTER HA", 0x31, "Old_Permic"),
    c(0x1036D, None, "OLD PERMIC LETTER TSIU", 0x31, "Old_Permic"),
    c(0x1036E, None, "OLD PERMIC LETTER VER", 0x31, "Old_Permic"),
    c(0x1036F, None, "OLD PERMIC LETTER YER", 0x31, "Old_Permic"),
    c(0x10370, None, "OLD PERMIC LETTER YERI", 0x31, "Old_Permic"),
    c(0x10371, None, "OLD PERMIC LETTER YAT", 0x31, "Old_Permic"),
    c(0x10372, None, "OLD PERMIC LETTER IE", 0x31, "Old_Permic"),
    c(0x10373, None, "OLD PERMIC LETTER YU", 0x31, "Old_Permic"),
    c(0x10374, None, "OLD PERMIC LETTER YA", 0x31, "Old_Permic"),
    c(0x10375, None, "OLD PERMIC LETTER IA", 0x31, "Old_Permic"),
    c(0x10376, None, "COMBINING OLD PERMIC LETTER AN", 0x21, "Old_Permic"),
    c(0x10377, None, "COMBINING OLD PERMIC LETTER DOI", 0x21, "Old_Permic"),
    c(0x10378, None, "COMBINING OLD PERMIC LETTER ZATA", 0x21, "Old_Permic"),
    c(0x10379, None, "COMBINING OLD PERMIC LETTER NENOE", 0x21, "Old_Permic"),
    c(0x1037A, None, "COMBINING OLD PERMIC LETTER SII", 0x21, "Old_Permic"),
    c(0x10380, None, "UGARITIC LETTER ALPA", 0x31, "Ugaritic"),
    c(0x10381, None, "UGARITIC LETTER BETA", 0x31, "Ugaritic"),
    c(0x10382, None, "UGARITIC LETTER GAMLA", 0x31, "Ugaritic"),
    c(0x10383, None, "UGARITIC LETTER KHA", 0x31, "Ugaritic"),
    c(0x10384, None, "UGARITIC LETTER DELTA", 0x31, "Ugaritic"),
    c(0x10385, None, "UGARITIC LETTER HO", 0x31, "Ugaritic"),
    c(0x10386, None, "UGARITIC LETTER WO", 0x31, "Ugaritic"),
    c(0x10387, None, "UGARITIC LETTER ZETA", 0x31, "Ugaritic"),
    c(0x10388, None, "UGARITIC LETTER HOTA", 0x31, "Ugaritic"),
    c(0x10389, None, "UGARITIC LETTER TET", 0x31, "Ugaritic"),
    c(0x1038A, None, "UGARITIC LETTER YOD", 0x31, "Ugaritic"),
    c(0x1038B, None, "UGARITIC LETTER KAF", 0x31, "Ugaritic"),
    c(0x1038C, None, "UGARITIC LETTER SHIN", 0x31, "Ugaritic"),
    c(0x1038D, None, "UGARITIC LETTER LAMDA", 0x31, "Ugaritic"),
    c(0x1038E, None, "UGARITIC LETTER MEM", 0x31, "Ugaritic"),
    c(0x1038F, None, "UGARITIC LETTER DHAL", 0x31, "Ugaritic"),
    c(0x10390, None, "UGARITIC LETTER NUN", 0x31, "Ugaritic"),
    c(0x10391, None, "UGARITIC LETTER ZU", 0x31, "Ugaritic"),
    c(0x10392, None, "UGARITIC LETTER SAMKA", 0x31, "Ugaritic"),
    c(0x10393, None, "UGARITIC LETTER AIN", 0x31, "Ugaritic"),
    c(0x10394, None, "UGARITIC LETTER PU", 0x31, "Ugaritic"),
    c(0x10395, None, "UGARITIC LETTER SADE", 0x31, "Ugaritic"),
    c(0x10396, None, "UGARITIC LETTER QOPA", 0x31, "Ugaritic"),
    c(0x10397, None, "UGARITIC LETTER RASHA", 0x31, "Ugaritic"),
    c(0x10398, None, "UGARITIC LETTER THANNA", 0x31, "Ugaritic"),
    c(0x10399, None, "UGARITIC LETTER GHAIN", 0x31, "Ugaritic"),
    c(0x1039A, None, "UGARITIC LETTER TO", 0x31, "Ugaritic"),
    c(0x1039B, None, "UGARITIC LETTER I", 0x31, "Ugaritic"),
    c(0x1039C, None, "UGARITIC LETTER U", 0x31, "Ugaritic"),
    c(0x1039D, None, "UGARITIC LETTER SSU", 0x31, "Ugaritic"),
    c(0x1039F, None, "UGARITIC WORD DIVIDER", 0x00, "Ugaritic"),
    c(0x103A0, None, "OLD PERSIAN SIGN A", 0x31, "Old_Persian"),
    c(0x103A1, None, "OLD PERSIAN SIGN I", 0x31, "Old_Persian"),
    c(0x103A2, None, "OLD PERSIAN SIGN U", 0x31, "Old_Persian"),
    c(0x103A3, None, "OLD PERSIAN SIGN KA", 0x31, "Old_Persian"),
    c(0x103A4, None, "OLD PERSIAN SIGN KU", 0x31, "Old_Persian"),
    c(0x103A5, None, "OLD PERSIAN SIGN GA", 0x31, "Old_Persian"),
    c(0x103A6, None, "OLD PERSIAN SIGN GU", 0x31, "Old_Persian"),
    c(0x103A7, None, "OLD PERSIAN SIGN XA", 0x31, "Old_Persian"),
    c(0x103A8, None, "OLD PERSIAN SIGN CA", 0x31, "Old_Persian"),
    c(0x103A9, None, "OLD PERSIAN SIGN JA", 0x31, "Old_Persian"),
    c(0x103AA, None, "OLD PERSIAN SIGN JI", 0x31, "Old_Persian"),
    c(0x103AB, None, "OLD PERSIAN SIGN TA", 0x31, "Old_Persian"),
    c(0x103AC, None, "OLD PERSIAN SIGN TU", 0x31, "Old_Persian"),
    c(0x103AD, None, "OLD PERSIAN SIGN DA", 0x31, "Old_Persian"),
    c(0x103AE, None, "OLD PERSIAN SIGN DI", 0x31, "Old_Persian"),
    c(0x103AF, None, "OLD PERSIAN SIGN DU", 0x31, "Old_Persian"),
    c(0x103B0, None, "OLD PERSIAN SIGN THA", 0x31, "Old_Persian"),
    c(0x103B1, None, "OLD PERSIAN SIGN PA", 0x31, "Old_Persian"),
    c(0x103B2, None, "OLD PERSIAN SIGN BA", 0x31, "Old_Persian"),
    c(0x103B3, None, "OLD PERSIAN SIGN FA", 0x31, "Old_Persian"),
    c(0x103B4, None, "OLD PERSIAN SIGN NA", 0x31, "Old_Persian"),
    c(0x103B5, None, "OLD PERSIAN SIGN NU", 0x31, "Old_Persian"),
    c(0x103B6, None, "OLD PERSIAN SIGN MA", 0x31, "Old_Persian"),
    c(0x103B7, None, "OLD PERSIAN SIGN MI", 0x31, "Old_Persian"),
    c(0x103B8, None, "OLD PERSIAN SIGN MU", 0x31, "Old_Persian"),
    c(0x103B9, None, "OLD PERSIAN SIGN YA", 0x31, "Old_Persian"),
    c(0x103BA, None, "OLD PERSIAN SIGN VA", 0x31, "Old_Persian"),
    c(0x103BB, None, "OLD PERSIAN SIGN VI", 0x31, "Old_Persian"),
    c(0x103BC, None, "OLD PERSIAN SIGN RA", 0x31, "Old_Persian"),
    c(0x103BD, None, "OLD PERSIAN SIGN RU", 0x31, "Old_Persian"),
    c(0x103BE, None, "OLD PERSIAN SIGN LA", 0x31, "Old_Persian"),
    c(0x103BF, None, "OLD PERSIAN SIGN SA", 0x31, "Old_Persian"),
    c(0x103C0, None, "OLD PERSIAN SIGN ZA", 0x31, "Old_Persian"),
    c(0x103C1, None, "OLD PERSIAN SIGN SHA", 0x31, "Old_Persian"),
    c(0x103C2, None, "OLD PERSIAN SIGN SSA", 0x31, "Old_Persian"),
    c(0x103C3, None, "OLD PERSIAN SIGN HA", 0x31, "Old_Persian"),
    c(0x103C8, None, "OLD PERSIAN SIGN AURAMAZDAA", 0x31, "Old_Persian"),
    c(0x103C9, None, "OLD PERSIAN SIGN AURAMAZDAA-2", 0x31, "Old_Persian"),
    c(0x103CA, None, "OLD PERSIAN SIGN AURAMAZDAAHA", 0x31, "Old_Persian"),
    c(0x103CB, None, "OLD PERSIAN SIGN XSHAAYATHIYA", 0x31, "Old_Persian"),
    c(0x103CC, None, "OLD PERSIAN SIGN DAHYAAUSH", 0x31, "Old_Persian"),
    c(0x103CD, None, "OLD PERSIAN SIGN DAHYAAUSH-2", 0x31, "Old_Persian"),
    c(0x103CE, None, "OLD PERSIAN SIGN BAGA", 0x31, "Old_Persian"),
    c(0x103CF, None, "OLD PERSIAN SIGN BUUMISH", 0x31, "Old_Persian"),
    c(0x103D0, None, "OLD PERSIAN WORD DIVIDER", 0x00, "Old_Persian"),
    c(0x103D1, None, "OLD PERSIAN NUMBER ONE", 0x31, "Old_Persian"),
    c(0x103D2, None, "OLD PERSIAN NUMBER TWO", 0x31, "Old_Persian"),
    c(0x103D3, None, "OLD PERSIAN NUMBER TEN", 0x31, "Old_Persian"),
    c(0x103D4, None, "OLD PERSIAN NUMBER TWENTY", 0x31, "Old_Persian"),
    c(0x103D5, None, "OLD PERSIAN NUMBER HUNDRED", 0x31, "Old_Persian"),
    c(0x10400, None, "DESERET CAPITAL LETTER LONG I", 0x31, "Deseret"),
    c(0x10401, None, "DESERET CAPITAL LETTER LONG E", 0x31, "Deseret"),
    c(0x10402, None, "DESERET CAPITAL LETTER LONG A", 0x31, "Deseret"),
    c(0x10403, None, "DESERET CAPITAL LETTER LONG AH", 0x31, "Deseret"),
    c(0x10404, None, "DESERET CAPITAL LETTER LONG O", 0x31, "Deseret"),
    c(0x10405, None, "DESERET CAPITAL LETTER LONG OO", 0x31, "Deseret"),
    c(0x10406, None, "DESERET CAPITAL LETTER SHORT I", 0x31, "Deseret"),
    c(0x10407, None, "DESERET CAPITAL LETTER SHORT E", 0x31, "Deseret"),
    c(0x10408, None, "DESERET CAPITAL LETTER SHORT A", 0x31, "Deseret"),
    c(0x10409, None, "DESERET CAPITAL LETTER SHORT AH", 0x31, "Deseret"),
    c(0x1040A, None, "DESERET CAPITAL LETTER SHORT O", 0x31, "Deseret"),
    c(0x1040B, None, "DESERET CAPITAL LETTER SHORT OO", 0x31, "Deseret"),
    c(0x1040C, None, "DESERET CAPITAL LETTER AY", 0x31, "Deseret"),
    c(0x1040D, None, "DESERET CAPITAL LETTER OW", 0x31, "Deseret"),
    c(0x1040E, None, "DESERET CAPITAL LETTER WU", 0x31, "Deseret"),
    c(0x1040F, None, "DESERET CAPITAL LETTER YEE", 0x31, "Deseret"),
    c(0x10410, None, "DESERET CAPITAL LETTER H", 0x31, "Deseret"),
    c(0x10411, None, "DESERET CAPITAL LETTER PEE", 0x31, "Deseret"),
    c(0x10412, None, "DESERET CAPITAL LETTER BEE", 0x31, "Deseret"),
    c(0x10413, None, "DESERET CAPITAL LETTER TEE", 0x31, "Deseret"),
    c(0x10414, None, "DESERET CAPITAL LETTER DEE", 0x31, "Deseret"),
    c(0x10415, None, "DESERET CAPITAL LETTER CHEE", 0x31, "Deseret"),
    c(0x10416, None, "DESERET CAPITAL LETTER JEE", 0x31, "Deseret"),
    c(0x10417, None, "DESERET CAPITAL LETTER KAY", 0x31, "Deseret"),
    c(0x10418, None, "DESERET CAPITAL LETTER GAY", 0x31, "Deseret"),
    c(0x10419, None, "DESERET CAPITAL LETTER EF", 0x31, "Deseret"),
    c(0x1041A, None, "DESERET CAPITAL LETTER VEE", 0x31, "Deseret"),
    c(0x1041B, None, "DESERET CAPITAL LETTER ETH", 0x31, "Deseret"),
    c(0x1041C, None, "DESERET CAPITAL LETTER THEE", 0x31, "Deseret"),
    c(0x1041D, None, "DESERET CAPITAL LETTER ES", 0x31, "Deseret"),
    c(0x1041E, None, "DESERET CAPITAL LETTER ZEE", 0x31, "Deseret"),
    c(0x1041F, None, "DESERET CAPITAL LETTER ESH", 0x31, "Deseret"),
    c(0x10420, None, "DESERET CAPITAL LETTER ZHEE", 0x31, "Deseret"),
    c(0x10421, None, "DESERET CAPITAL LETTER ER", 0x31, "Deseret"),
    c(0x10422, None, "DESERET CAPITAL LETTER EL", 0x31, "Deseret"),
    c(0x10423, None, "DESERET CAPITAL LETTER EM", 0x31, "Deseret"),
    c(0x10424, None, "DESERET CAPITAL LETTER EN", 0x31, "Deseret"),
    c(0x10425, None, "DESERET CAPITAL LETTER ENG", 0x31, "Deseret"),
    c(0x10426, None, "DESERET CAPITAL LETTER OI", 0x31, "Deseret"),
    c(0x10427, None, "DESERET CAPITAL LETTER EW", 0x31, "Deseret"),
    c(0x10428, None, "DESERET SMALL LETTER LONG I", 0x31, "Deseret"),
    c(0x10429, None, "DESERET SMALL LETTER LONG E", 0x31, "Deseret"),
    c(0x1042A, None, "DESERET SMALL LETTER LONG A", 0x31, "Deseret"),
    c(0x1042B, None, "DESERET SMALL LETTER LONG AH", 0x31, "Deseret"),
    c(0x1042C, None, "DESERET SMALL LETTER LONG O", 0x31, "Deseret"),
    c(0x1042D, None, "DESERET SMALL LETTER LONG OO", 0x31, "Deseret"),
    c(0x1042E, None, "DESERET SMALL LETTER SHORT I", 0x31, "Deseret"),
    c(0x1042F, None, "DESERET SMALL LETTER SHORT E", 0x31, "Deseret"),
    c(0x10430, None, "DESERET SMALL LETTER SHORT A", 0x31, "Deseret"),
    c(0x10431, None, "DESERET SMALL LETTER SHORT AH", 0x31, "Deseret"),
    c(0x10432, None, "DESERET SMALL LETTER SHORT O", 0x31, "Deseret"),
    c(0x10433, None, "DESERET SMALL LETTER SHORT OO", 0x31, "Deseret"),
    c(0x10434, None, "DESERET SMALL LETTER AY", 0x31, "Deseret"),
    c(0x10435, None, "DESERET SMALL LETTER OW", 0x31, "Deseret"),
    c(0x10436, None, "DESERET SMALL LETTER WU", 0x31, "Deseret"),
    c(0x10437, None, "DESERET SMALL LETTER YEE", 0x31, "Deseret"),
    c(0x10438, None, "DESERET SMALL LETTER H", 0x31, "Deseret"),
    c(0x10439, None, "DESERET SMALL LETTER PEE", 0x31, "Deseret"),
    c(0x1043A, None, "DESERET SMALL LETTER BEE", 0x31, "Deseret"),
    c(0x1043B, None, "DESERET SMALL LETTER TEE", 0x31, "Deseret"),
    c(0x1043C, None, "DESERET SMALL LETTER DEE", 0x31, "Deseret"),
    c(0x1043D, None, "DESERET SMALL LETTER CHEE", 0x31, "Deseret"),
    c(0x1043E, None, "DESERET SMALL LETTER JEE", 0x31, "Deseret"),
    c(0x1043F, None, "DESERET SMALL LETTER KAY", 0x31, "Deseret"),
    c(0x10440, None, "DESERET SMALL LETTER GAY", 0x31, "Deseret"),
    c(0x10441, None, "DESERET SMALL LETTER EF", 0x31, "Deseret"),
    c(0x10442, None, "DESERET SMALL LETTER VEE", 0x31, "Deseret"),
    c(0x10443, None, "DESERET SMALL LETTER ETH", 0x31, "Deseret"),
    c(0x10444, None, "DESERET SMALL LETTER THEE", 0x31, "Deseret"),
    c(0x10445, None, "DESERET SMALL LETTER ES", 0x31, "Deseret"),
    c(0x10446, None, "DESERET SMALL LETTER ZEE", 0x31, "Deseret"),
    c(0x10447, None, "DESERET SMALL LETTER ESH", 0x31, "Deseret"),
    c(0x10448, None, "DESERET SMALL LETTER ZHEE", 0x31, "Deseret"),
    c(0x10449, None, "DESERET SMALL LETTER ER", 0x31, "Deseret"),
    c(0x1044A, None, "DESERET SMALL LETTER EL", 0x31, "Deseret"),
    c(0x1044B, None, "DESERET SMALL LETTER EM", 0x31, "Deseret"),
    c(0x1044C, None, "DESERET SMALL LETTER EN", 0x31, "Deseret"),
    c(0x1044D, None, "DESERET SMALL LETTER ENG", 0x31, "Deseret"),
    c(0x1044E, None, "DESERET SMALL LETTER OI", 0x31, "Deseret"),
    c(0x1044F, None, "DESERET SMALL LETTER EW", 0x31, "Deseret"),
    c(0x10450, None, "SHAVIAN LETTER PEEP", 0x31, "Shavian"),
    c(0x10451, None, "SHAVIAN LETTER TOT", 0x31, "Shavian"),
    c(0x10452, None, "SHAVIAN LETTER KICK", 0x31, "Shavian"),
    c(0x10453, None, "SHAVIAN LETTER FEE", 0x31, "Shavian"),
    c(0x10454, None, "SHAVIAN LETTER THIGH", 0x31, "Shavian"),
    c(0x10455, None, "SHAVIAN LETTER SO", 0x31, "Shavian"),
    c(0x10456, None, "SHAVIAN LETTER SURE", 0x31, "Shavian"),
    c(0x10457, None, "SHAVIAN LETTER CHURCH", 0x31, "Shavian"),
    c(0x10458, None, "SHAVIAN LETTER YEA", 0x31, "Shavian"),
    c(0x10459, None, "SHAVIAN LETTER HUNG", 0x31, "Shavian"),
    c(0x1045A, None, "SHAVIAN LETTER BIB", 0x31, "Shavian"),
    c(0x1045B, None, "SHAVIAN LETTER DEAD", 0x31, "Shavian"),
    c(0x1045C, None, "SHAVIAN LETTER GAG", 0x31, "Shavian"),
    c(0x1045D, None, "SHAVIAN LETTER VOW", 0x31, "Shavian"),
    c(0x1045E, None, "SHAVIAN LETTER THEY", 0x31, "Shavian"),
    c(0x1045F, None, "SHAVIAN LETTER ZOO", 0x31, "Shavian"),
    c(0x10460, None, "SHAVIAN LETTER MEASURE", 0x31, "Shavian"),
    c(0x10461, None, "SHAVIAN LETTER JUDGE", 0x31, "Shavian"),
    c(0x10462, None, "SHAVIAN LETTER WOE", 0x31, "Shavian"),
    c(0x10463, None, "SHAVIAN LETTER HA-HA", 0x31, "Shavian"),
    c(0x10464, None, "SHAVIAN LETTER LOLL", 0x31, "Shavian"),
    c(0x10465, None, "SHAVIAN LETTER MIME", 0x31, "Shavian"),
    c(0x10466, None, "SHAVIAN LETTER IF", 0x31, "Shavian"),
    c(0x10467, None, "SHAVIAN LETTER EGG", 0x31, "Shavian"),
    c(0x10468, None, "SHAVIAN LETTER ASH", 0x31, "Shavian"),
    c(0x10469, None, "SHAVIAN LETTER ADO", 0x31, "Shavian"),
    c(0x1046A, None, "SHAVIAN LETTER ON", 0x31, "Shavian"),
    c(0x1046B, None, "SHAVIAN LETTER WOOL", 0x31, "Shavian"),
    c(0x1046C, None, "SHAVIAN LETTER OUT", 0x31, "Shavian"),
    c(0x1046D, None, "SHAVIAN LETTER AH", 0x31, "Shavian"),
    c(0x1046E, None, "SHAVIAN LETTER ROAR", 0x31, "Shavian"),
    c(0x1046F, None, "SHAVIAN LETTER NUN", 0x31, "Shavian"),
    c(0x10470, None, "SHAVIAN LETTER EAT", 0x31, "Shavian"),
    c(0x10471, None, "SHAVIAN LETTER AGE", 0x31, "Shavian"),
    c(0x10472, None, "SHAVIAN LETTER ICE", 0x31, "Shavian"),
    c(0x10473, None, "SHAVIAN LETTER UP", 0x31, "Shavian"),
    c(0x10474, None, "SHAVIAN LETTER OAK", 0x31, "Shavian"),
    c(0x10475, None, "SHAVIAN LETTER OOZE", 0x31, "Shavian"),
    c(0x10476, None, "SHAVIAN LETTER OIL", 0x31, "Shavian"),
    c(0x10477, None, "SHAVIAN LETTER AWE", 0x31, "Shavian"),
    c(0x10478, None, "SHAVIAN LETTER ARE", 0x31, "Shavian"),
    c(0x10479, None, "SHAVIAN LETTER OR", 0x31, "Shavian"),
    c(0x1047A, None, "SHAVIAN LETTER AIR", 0x31, "Shavian"),
    c(0x1047B, None, "SHAVIAN LETTER ERR", 0x31, "Shavian"),
    c(0x1047C, None, "SHAVIAN LETTER ARRAY", 0x31, "Shavian"),
    c(0x1047D, None, "SHAVIAN LETTER EAR", 0x31, "Shavian"),
    c(0x1047E, None, "SHAVIAN LETTER IAN", 0x31, "Shavian"),
    c(0x1047F, None, "SHAVIAN LETTER YEW", 0x31, "Shavian"),
    c(0x10480, None, "OSMANYA LETTER ALEF", 0x31, "Osmanya"),
    c(0x10481, None, "OSMANYA LETTER BA", 0x31, "Osmanya"),
    c(0x10482, None, "OSMANYA LETTER TA", 0x31, "Osmanya"),
    c(0x10483, None, "OSMANYA LETTER JA", 0x31, "Osmanya"),
    c(0x10484, None, "OSMANYA LETTER XA", 0x31, "Osmanya"),
    c(0x10485, None, "OSMANYA LETTER KHA", 0x31, "Osmanya"),
    c(0x10486, None, "OSMANYA LETTER DEEL", 0x31, "Osmanya"),
    c(0x10487, None, "OSMANYA LETTER RA", 0x31, "Osmanya"),
    c(0x10488, None, "OSMANYA LETTER SA", 0x31, "Osmanya"),
    c(0x10489, None, "OSMANYA LETTER SHIIN", 0x31, "Osmanya"),
    c(0x1048A, None, "OSMANYA LETTER DHA", 0x31, "Osmanya"),
    c(0x1048B, None, "OSMANYA LETTER CAYN", 0x31, "Osmanya"),
    c(0x1048C, None, "OSMANYA LETTER GA", 0x31, "Osmanya"),
    c(0x1048D, None, "OSMANYA LETTER FA", 0x31, "Osmanya"),
    c(0x1048E, None, "OSMANYA LETTER QAAF", 0x31, "Osmanya"),
    c(0x1048F, None, "OSMANYA LETTER KAAF", 0x31, "Osmanya"),
    c(0x10490, None, "OSMANYA LETTER LAAN", 0x31, "Osmanya"),
    c(0x10491, None, "OSMANYA LETTER MIIN", 0x31, "Osmanya"),
    c(0x10492, None, "OSMANYA LETTER NUUN", 0x31, "Osmanya"),
    c(0x10493, None, "OSMANYA LETTER WAW", 0x31, "Osmanya"),
    c(0x10494, None, "OSMANYA LETTER HA", 0x31, "Osmanya"),
    c(0x10495, None, "OSMANYA LETTER YA", 0x31, "Osmanya"),
    c(0x10496, None, "OSMANYA LETTER A", 0x31, "Osmanya"),
    c(0x10497, None, "OSMANYA LETTER E", 0x31, "Osmanya"),
    c(0x10498, None, "OSMANYA LETTER I", 0x31, "Osmanya"),
    c(0x10499, None, "OSMANYA LETTER O", 0x31, "Osmanya"),
    c(0x1049A, None, "OSMANYA LETTER U", 0x31, "Osmanya"),
    c(0x1049B, None, "OSMANYA LETTER AA", 0x31, "Osmanya"),
    c(0x1049C, None, "OSMANYA LETTER EE", 0x31, "Osmanya"),
    c(0x1049D, None, "OSMANYA LETTER OO", 0x31, "Osmanya"),
    c(0x104A0, None, "OSMANYA DIGIT ZERO", 0x20, "Osmanya"),
    c(0x104A1, None, "OSMANYA DIGIT ONE", 0x20, "Osmanya"),
    c(0x104A2, None, "OSMANYA DIGIT TWO", 0x20, "Osmanya"),
    c(0x104A3, None, "OSMANYA DIGIT THREE", 0x20, "Osmanya"),
    c(0x104A4, None, "OSMANYA DIGIT FOUR", 0x20, "Osmanya"),
    c(0x104A5, None, "OSMANYA DIGIT FIVE", 0x20, "Osmanya"),
    c(0x104A6, None, "OSMANYA DIGIT SIX", 0x20, "Osmanya"),
    c(0x104A7, None, "OSMANYA DIGIT SEVEN", 0x20, "Osmanya"),
    c(0x104A8, None, "OSMANYA DIGIT EIGHT", 0x20, "Osmanya"),
    c(0x104A9, None, "OSMANYA DIGIT NINE", 0x20, "Osmanya"),
    c(0x104B0, None, "OSAGE CAPITAL LETTER A", 0x31, "Osage"),
    c(0x104B1, None, "OSAGE CAPITAL LETTER AI", 0x31, "Osage"),
    c(0x104B2, None, "OSAGE CAPITAL LETTER AIN", 0x31, "Osage"),
    c(0x104B3, None, "OSAGE CAPITAL LETTER AH", 0x31, "Osage"),
    c(0x104B4, None, "OSAGE CAPITAL LETTER BRA", 0x31, "Osage"),
    c(0x104B5, None, "OSAGE CAPITAL LETTER CHA", 0x31, "Osage"),
    c(0x104B6, None, "OSAGE CAPITAL LETTER EHCHA", 0x31, "Osage"),
    c(0x104B7, None, "OSAGE CAPITAL LETTER E", 0x31, "Osage"),
    c(0x104B8, None, "OSAGE CAPITAL LETTER EIN", 0x31, "Osage"),
    c(0x104B9, None, "OSAGE CAPITAL LETTER HA", 0x31, "Osage"),
    c(0x104BA, None, "OSAGE CAPITAL LETTER HYA", 0x31, "Osage"),
    c(0x104BB, None, "OSAGE CAPITAL LETTER I", 0x31, "Osage"),
    c(0x104BC, None, "OSAGE CAPITAL LETTER KA", 0x31, "Osage"),
    c(0x104BD, None, "OSAGE CAPITAL LETTER EHKA", 0x31, "Osage"),
    c(0x104BE, None, "OSAGE CAPITAL LETTER KYA", 0x31, "Osage"),
    c(0x104BF, None, "OSAGE CAPITAL LETTER LA", 0x31, "Osage"),
    c(0x104C0, None, "OSAGE CAPITAL LETTER MA", 0x31, "Osage"),
    c(0x104C1, None, "OSAGE CAPITAL LETTER NA", 0x31, "Osage"),
    c(0x104C2, None, "OSAGE CAPITAL LETTER O", 0x31, "Osage"),
    c(0x104C3, None, "OSAGE CAPITAL LETTER OIN", 0x31, "Osage"),
    c(0x104C4, None, "OSAGE CAPITAL LETTER PA", 0x31, "Osage"),
    c(0x104C5, None, "OSAGE CAPITAL LETTER EHPA", 0x31, "Osage"),
    c(0x104C6, None, "OSAGE CAPITAL LETTER SA", 0x31, "Osage"),
    c(0x104C7, None, "OSAGE CAPITAL LETTER SHA", 0x31, "Osage"),
    c(0x104C8, None, "OSAGE CAPITAL LETTER TA", 0x31, "Osage"),
    c(0x104C9, None, "OSAGE CAPITAL LETTER EHTA", 0x31, "Osage"),
    c(0x104CA, None, "OSAGE CAPITAL LETTER TSA", 0x31, "Osage"),
    c(0x104CB, None, "OSAGE CAPITAL LETTER EHTSA", 0x31, "Osage"),
    c(0x104CC, None, "OSAGE CAPITAL LETTER TSHA", 0x31, "Osage"),
    c(0x104CD, None, "OSAGE CAPITAL LETTER DHA", 0x31, "Osage"),
    c(0x104CE, None, "OSAGE CAPITAL LETTER U", 0x31, "Osage"),
    c(0x104CF, None, "OSAGE CAPITAL LETTER WA", 0x31, "Osage"),
    c(0x104D0, None, "OSAGE CAPITAL LETTER KHA", 0x31, "Osage"),
    c(0x104D1, None, "OSAGE CAPITAL LETTER GHA", 0x31, "Osage"),
    c(0x104D2, None, "OSAGE CAPITAL LETTER ZA", 0x31, "Osage"),
    c(0x104D3, None, "OSAGE CAPITAL LETTER ZHA", 0x31, "Osage"),
    c(0x104D8, None, "OSAGE SMALL LETTER A", 0x31, "Osage"),
    c(0x104D9, None, "OSAGE SMALL LETTER AI", 0x31, "Osage"),
    c(0x104DA, None, "OSAGE SMALL LETTER AIN", 0x31, "Osage"),
    c(0x104DB, None, "OSAGE SMALL LETTER AH", 0x31, "Osage"),
    c(0x104DC, None, "OSAGE SMALL LETTER BRA", 0x31, "Osage"),
    c(0x104DD, None, "OSAGE SMALL LETTER CHA", 0x31, "Osage"),
    c(0x104DE, None, "OSAGE SMALL LETTER EHCHA", 0x31, "Osage"),
    c(0x104DF, None, "OSAGE SMALL LETTER E", 0x31, "Osage"),
    c(0x104E0, None, "OSAGE SMALL LETTER EIN", 0x31, "Osage"),
    c(0x104E1, None, "OSAGE SMALL LETTER HA", 0x31, "Osage"),
    c(0x104E2, None, "OSAGE SMALL LETTER HYA", 0x31, "Osage"),
    c(0x104E3, None, "OSAGE SMALL LETTER I", 0x31, "Osage"),
    c(0x104E4, None, "OSAGE SMALL LETTER KA", 0x31, "Osage"),
    c(0x104E5, None, "OSAGE SMALL LETTER EHKA", 0x31, "Osage"),
    c(0x104E6, None, "OSAGE SMALL LETTER KYA", 0x31, "Osage"),
    c(0x104E7, None, "OSAGE SMALL LETTER LA", 0x31, "Osage"),
    c(0x104E8, None, "OSAGE SMALL LETTER MA", 0x31, "Osage"),
    c(0x104E9, None, "OSAGE SMALL LETTER NA", 0x31, "Osage"),
    c(0x104EA, None, "OSAGE SMALL LETTER O", 0x31, "Osage"),
    c(0x104EB, None, "OSAGE SMALL LETTER OIN", 0x31, "Osage"),
    c(0x104EC, None, "OSAGE SMALL LETTER PA", 0x31, "Osage"),
    c(0x104ED, None, "OSAGE SMALL LETTER EHPA", 0x31, "Osage"),
    c(0x104EE, None, "OSAGE SMALL LETTER SA", 0x31, "Osage"),
    c(0x104EF, None, "OSAGE SMALL LETTER SHA", 0x31, "Osage"),
    c(0x104F0, None, "OSAGE SMALL LETTER TA", 0x31, "Osage"),
    c(0x104F1, None, "OSAGE SMALL LETTER EHTA", 0x31, "Osage"),
    c(0x104F2, None, "OSAGE SMALL LETTER TSA", 0x31, "Osage"),
    c(0x104F3, None, "OSAGE SMALL LETTER EHTSA", 0x31, "Osage"),
    c(0x104F4, None, "OSAGE SMALL LETTER TSHA", 0x31, "Osage"),
    c(0x104F5, None, "OSAGE SMALL LETTER DHA", 0x31, "Osage"),
    c(0x104F6, None, "OSAGE SMALL LETTER U", 0x31, "Osage"),
    c(0x104F7, None, "OSAGE SMALL LETTER WA", 0x31, "Osage"),
    c(0x104F8, None, "OSAGE SMALL LETTER KHA", 0x31, "Osage"),
    c(0x104F9, None, "OSAGE SMALL LETTER GHA", 0x31, "Osage"),
    c(0x104FA, None, "OSAGE SMALL LETTER ZA", 0x31, "Osage"),
    c(0x104FB, None, "OSAGE SMALL LETTER ZHA", 0x31, "Osage"),
    c(0x10500, None, "ELBASAN LETTER A", 0x31, "Elbasan"),
    c(0x10501, None, "ELBASAN LETTER BE", 0x31, "Elbasan"),
    c(0x10502, None, "ELBASAN LETTER CE", 0x31, "Elbasan"),
    c(0x10503, None, "ELBASAN LETTER CHE", 0x31, "Elbasan"),
    c(0x10504, None, "ELBASAN LETTER DE", 0x31, "Elbasan"),
    c(0x10505, None, "ELBASAN LETTER NDE", 0x31, "Elbasan"),
    c(0x10506, None, "ELBASAN LETTER DHE", 0x31, "Elbasan"),
    c(0x10507, None, "ELBASAN LETTER EI", 0x31, "Elbasan"),
    c(0x10508, None, "ELBASAN LETTER E", 0x31, "Elbasan"),
    c(0x10509, None, "ELBASAN LETTER FE", 0x31, "Elbasan"),
    c(0x1050A, None, "ELBASAN LETTER GE", 0x31, "Elbasan"),
    c(0x1050B, None, "ELBASAN LETTER GJE", 0x31, "Elbasan"),
    c(0x1050C, None, "ELBASAN LETTER HE", 0x31, "Elbasan"),
    c(0x1050D, None, "ELBASAN LETTER I", 0x31, "Elbasan"),
    c(0x1050E, None, "ELBASAN LETTER JE", 0x31, "Elbasan"),
    c(0x1050F, None, "ELBASAN LETTER KE", 0x31, "Elbasan"),
    c(0x10510, None, "ELBASAN LETTER LE", 0x31, "Elbasan"),
    c(0x10511, None, "ELBASAN LETTER LLE", 0x31, "Elbasan"),
    c(0x10512, None, "ELBASAN LETTER ME", 0x31, "Elbasan"),
    c(0x10513, None, "ELBASAN LETTER NE", 0x31, "Elbasan"),
    c(0x10514, None, "ELBASAN LETTER NA", 0x31, "Elbasan"),
    c(0x10515, None, "ELBASAN LETTER NJE", 0x31, "Elbasan"),
    c(0x10516, None, "ELBASAN LETTER O", 0x31, "Elbasan"),
    c(0x10517, None, "ELBASAN LETTER PE", 0x31, "Elbasan"),
    c(0x10518, None, "ELBASAN LETTER QE", 0x31, "Elbasan"),
    c(0x10519, None, "ELBASAN LETTER RE", 0x31, "Elbasan"),
    c(0x1051A, None, "ELBASAN LETTER RRE", 0x31, "Elbasan"),
    c(0x1051B, None, "ELBASAN LETTER SE", 0x31, "Elbasan"),
    c(0x1051C, None, "ELBASAN LETTER SHE", 0x31, "Elbasan"),
    c(0x1051D, None, "ELBASAN LETTER TE", 0x31, "Elbasan"),
    c(0x1051E, None, "ELBASAN LETTER THE", 0x31, "Elbasan"),
    c(0x1051F, None, "ELBASAN LETTER U", 0x31, "Elbasan"),
    c(0x10520, None, "ELBASAN LETTER VE", 0x31, "Elbasan"),
    c(0x10521, None, "ELBASAN LETTER XE", 0x31, "Elbasan"),
    c(0x10522, None, "ELBASAN LETTER Y", 0x31, "Elbasan"),
    c(0x10523, None, "ELBASAN LETTER ZE", 0x31, "Elbasan"),
    c(0x10524, None, "ELBASAN LETTER ZHE", 0x31, "Elbasan"),
    c(0x10525, None, "ELBASAN LETTER GHE", 0x31, "Elbasan"),
    c(0x10526, None, "ELBASAN LETTER GHAMMA", 0x31, "Elbasan"),
    c(0x10527, None, "ELBASAN LETTER KHE", 0x31, "Elbasan"),
    c(0x10530, None, "CAUCASIAN ALBANIAN LETTER ALT", 0x31, "Caucasian_Albanian"),
    c(0x10531, None, "CAUCASIAN ALBANIAN LETTER BET", 0x31, "Caucasian_Albanian"),
    c(0x10532, None, "CAUCASIAN ALBANIAN LETTER GIM", 0x31, "Caucasian_Albanian"),
    c(0x10533, None, "CAUCASIAN ALBANIAN LETTER DAT", 0x31, "Caucasian_Albanian"),
    c(0x10534, None, "CAUCASIAN ALBANIAN LETTER EB", 0x31, "Caucasian_Albanian"),
    c(0x10535, None, "CAUCASIAN ALBANIAN LETTER ZARL", 0x31, "Caucasian_Albanian"),
    c(0x10536, None, "CAUCASIAN ALBANIAN LETTER EYN", 0x31, "Caucasian_Albanian"),
    c(0x10537, None, "CAUCASIAN ALBANIAN LETTER ZHIL", 0x31, "Caucasian_Albanian"),
    c(0x10538, None, "CAUCASIAN ALBANIAN LETTER TAS", 0x31, "Caucasian_Albanian"),
    c(0x10539, None, "CAUCASIAN ALBANIAN LETTER CHA", 0x31, "Caucasian_Albanian"),
    c(0x1053A, None, "CAUCASIAN ALBANIAN LETTER YOWD", 0x31, "Caucasian_Albanian"),
    c(0x1053B, None, "CAUCASIAN ALBANIAN LETTER ZHA", 0x31, "Caucasian_Albanian"),
    c(0x1053C, None, "CAUCASIAN ALBANIAN LETTER IRB", 0x31, "Caucasian_Albanian"),
    c(0x1053D, None, "CAUCASIAN ALBANIAN LETTER SHA", 0x31, "Caucasian_Albanian"),
    c(0x1053E, None, "CAUCASIAN ALBANIAN LETTER LAN", 0x31, "Caucasian_Albanian"),
    c(0x1053F, None, "CAUCASIAN ALBANIAN LETTER INYA", 0x31, "Caucasian_Albanian"),
    c(0x10540, None, "CAUCASIAN ALBANIAN LETTER XEYN", 0x31, "Caucasian_Albanian"),
    c(0x10541, None, "CAUCASIAN ALBANIAN LETTER DYAN", 0x31, "Caucasian_Albanian"),
    c(0x10542, None, "CAUCASIAN ALBANIAN LETTER CAR", 0x31, "Caucasian_Albanian"),
    c(0x10543, None, "CAUCASIAN ALBANIAN LETTER JHOX", 0x31, "Caucasian_Albanian"),
    c(0x10544, None, "CAUCASIAN ALBANIAN LETTER KAR", 0x31, "Caucasian_Albanian"),
    c(0x10545, None, "CAUCASIAN ALBANIAN LETTER LYIT", 0x31, "Caucasian_Albanian"),
    c(0x10546, None, "CAUCASIAN ALBANIAN LETTER HEYT", 0x31, "Caucasian_Albanian"),
    c(0x10547, None, "CAUCASIAN ALBANIAN LETTER QAY", 0x31, "Caucasian_Albanian"),
    c(0x10548, None, "CAUCASIAN ALBANIAN LETTER AOR", 0x31, "Caucasian_Albanian"),
    c(0x10549, None, "CAUCASIAN ALBANIAN LETTER CHOY", 0x31, "Caucasian_Albanian"),
    c(0x1054A, None, "CAUCASIAN ALBANIAN LETTER CHI", 0x31, "Caucasian_Albanian"),
    c(0x1054B, None, "CAUCASIAN ALBANIAN LETTER CYAY", 0x31, "Caucasian_Albanian"),
    c(0x1054C, None, "CAUCASIAN ALBANIAN LETTER MAQ", 0x31, "Caucasian_Albanian"),
    c(0x1054D, None, "CAUCASIAN ALBANIAN LETTER QAR", 0x31, "Caucasian_Albanian"),
    c(0x1054E, None, "CAUCASIAN ALBANIAN LETTER NOWC", 0x31, "Caucasian_Albanian"),
    c(0x1054F, None, "CAUCASIAN ALBANIAN LETTER DZYAY", 0x31, "Caucasian_Albanian"),
    c(0x10550, None, "CAUCASIAN ALBANIAN LETTER SHAK", 0x31, "Caucasian_Albanian"),
    c(0x10551, None, "CAUCASIAN ALBANIAN LETTER JAYN", 0x31, "Caucasian_Albanian"),
    c(0x10552, None, "CAUCASIAN ALBANIAN LETTER ON", 0x31, "Caucasian_Albanian"),
    c(0x10553, None, "CAUCASIAN ALBANIAN LETTER TYAY", 0x31, "Caucasian_Albanian"),
    c(0x10554, None, "CAUCASIAN ALBANIAN LETTER FAM", 0x31, "Caucasian_Albanian"),
    c(0x10555, None, "CAUCASIAN ALBANIAN LETTER DZAY", 0x31, "Caucasian_Albanian"),
    c(0x10556, None, "CAUCASIAN ALBANIAN LETTER CHAT", 0x31, "Caucasian_Albanian"),
    c(0x10557, None, "CAUCASIAN ALBANIAN LETTER PEN", 0x31, "Caucasian_Albanian"),
    c(0x10558, None, "CAUCASIAN ALBANIAN LETTER GHEYS", 0x31, "Caucasian_Albanian"),
    c(0x10559, None, "CAUCASIAN ALBANIAN LETTER RAT", 0x31, "Caucasian_Albanian"),
    c(0x1055A, None, "CAUCASIAN ALBANIAN LETTER SEYK", 0x31, "Caucasian_Albanian"),
    c(0x1055B, None, "CAUCASIAN ALBANIAN LETTER VEYZ", 0x31, "Caucasian_Albanian"),
    c(0x1055C, None, "CAUCASIAN ALBANIAN LETTER TIWR", 0x31, "Caucasian_Albanian"),
    c(0x1055D, None, "CAUCASIAN ALBANIAN LETTER SHOY", 0x31, "Caucasian_Albanian"),
    c(0x1055E, None, "CAUCASIAN ALBANIAN LETTER IWN", 0x31, "Caucasian_Albanian"),
    c(0x1055F, None, "CAUCASIAN ALBANIAN LETTER CYAW", 0x31, "Caucasian_Albanian"),
    c(0x10560, None, "CAUCASIAN ALBANIAN LETTER CAYN", 0x31, "Caucasian_Albanian"),
    c(0x10561, None, "CAUCASIAN ALBANIAN LETTER YAYD", 0x31, "Caucasian_Albanian"),
    c(0x10562, None, "CAUCASIAN ALBANIAN LETTER PIWR", 0x31, "Caucasian_Albanian"),
    c(0x10563, None, "CAUCASIAN ALBANIAN LETTER KIW", 0x31, "Caucasian_Albanian"),
    c(0x1056F, None, "CAUCASIAN ALBANIAN CITATION MARK", 0x00, "Caucasian_Albanian"),
    c(0x10570, None, "VITHKUQI CAPITAL LETTER A", 0x31, "Vithkuqi"),
    c(0x10571, None, "VITHKUQI CAPITAL LETTER BBE", 0x31, "Vithkuqi"),
    c(0x10572, None, "VITHKUQI CAPITAL LETTER BE", 0x31, "Vithkuqi"),
    c(0x10573, None, "VITHKUQI CAPITAL LETTER CE", 0x31, "Vithkuqi"),
    c(0x10574, None, "VITHKUQI CAPITAL LETTER CHE", 0x31, "Vithkuqi"),
    c(0x10575, None, "VITHKUQI CAPITAL LETTER DE", 0x31, "Vithkuqi"),
    c(0x10576, None, "VITHKUQI CAPITAL LETTER DHE", 0x31, "Vithkuqi"),
    c(0x10577, None, "VITHKUQI CAPITAL LETTER EI", 0x31, "Vithkuqi"),
    c(0x10578, None, "VITHKUQI CAPITAL LETTER E", 0x31, "Vithkuqi"),
    c(0x10579, None, "VITHKUQI CAPITAL LETTER FE", 0x31, "Vithkuqi"),
    c(0x1057A, None, "VITHKUQI CAPITAL LETTER GA", 0x31, "Vithkuqi"),
    c(0x1057C, None, "VITHKUQI CAPITAL LETTER HA", 0x31, "Vithkuqi"),
    c(0x1057D, None, "VITHKUQI CAPITAL LETTER HHA", 0x31, "Vithkuqi"),
    c(0x1057E, None, "VITHKUQI CAPITAL LETTER I", 0x31, "Vithkuqi"),
    c(0x1057F, None, "VITHKUQI CAPITAL LETTER IJE", 0x31, "Vithkuqi"),
    c(0x10580, None, "VITHKUQI CAPITAL LETTER JE", 0x31, "Vithkuqi"),
    c(0x10581, None, "VITHKUQI CAPITAL LETTER KA", 0x31, "Vithkuqi"),
    c(0x10582, None, "VITHKUQI CAPITAL LETTER LA", 0x31, "Vithkuqi"),
    c(0x10583, None, "VITHKUQI CAPITAL LETTER LLA", 0x31, "Vithkuqi"),
    c(0x10584, None, "VITHKUQI CAPITAL LETTER ME", 0x31, "Vithkuqi"),
    c(0x10585, None, "VITHKUQI CAPITAL LETTER NE", 0x31, "Vithkuqi"),
    c(0x10586, None, "VITHKUQI CAPITAL LETTER NJE", 0x31, "Vithkuqi"),
    c(0x10587, None, "VITHKUQI CAPITAL LETTER O", 0x31, "Vithkuqi"),
    c(0x10588, None, "VITHKUQI CAPITAL LETTER PE", 0x31, "Vithkuqi"),
    c(0x10589, None, "VITHKUQI CAPITAL LETTER QA", 0x31, "Vithkuqi"),
    c(0x1058A, None, "VITHKUQI CAPITAL LETTER RE", 0x31, "Vithkuqi"),
    c(0x1058C, None, "VITHKUQI CAPITAL LETTER SE", 0x31, "Vithkuqi"),
    c(0x1058D, None, "VITHKUQI CAPITAL LETTER SHE", 0x31, "Vithkuqi"),
    c(0x1058E, None, "VITHKUQI CAPITAL LETTER TE", 0x31, "Vithkuqi"),
    c(0x1058F, None, "VITHKUQI CAPITAL LETTER THE", 0x31, "Vithkuqi"),
    c(0x10590, None, "VITHKUQI CAPITAL LETTER U", 0x31, "Vithkuqi"),
    c(0x10591, None, "VITHKUQI CAPITAL LETTER VE", 0x31, "Vithkuqi"),
    c(0x10592, None, "VITHKUQI CAPITAL LETTER XE", 0x31, "Vithkuqi"),
    c(0x10594, None, "VITHKUQI CAPITAL LETTER Y", 0x31, "Vithkuqi"),
    c(0x10595, None, "VITHKUQI CAPITAL LETTER ZE", 0x31, "Vithkuqi"),
    c(0x10597, None, "VITHKUQI SMALL LETTER A", 0x31, "Vithkuqi"),
    c(0x10598, None, "VITHKUQI SMALL LETTER BBE", 0x31, "Vithkuqi"),
    c(0x10599, None, "VITHKUQI SMALL LETTER BE", 0x31, "Vithkuqi"),
    c(0x1059A, None, "VITHKUQI SMALL LETTER CE", 0x31, "Vithkuqi"),
    c(0x1059B, None, "VITHKUQI SMALL LETTER CHE", 0x31, "Vithkuqi"),
    c(0x1059C, None, "VITHKUQI SMALL LETTER DE", 0x31, "Vithkuqi"),
    c(0x1059D, None, "VITHKUQI SMALL LETTER DHE", 0x31, "Vithkuqi"),
    c(0x1059E, None, "VITHKUQI SMALL LETTER EI", 0x31, "Vithkuqi"),
    c(0x1059F, None, "VITHKUQI SMALL LETTER E", 0x31, "Vithkuqi"),
    c(0x105A0, None, "VITHKUQI SMALL LETTER FE", 0x31, "Vithkuqi"),
    c(0x105A1, None, "VITHKUQI SMALL LETTER GA", 0x31, "Vithkuqi"),
    c(0x105A3, None, "VITHKUQI SMALL LETTER HA", 0x31, "Vithkuqi"),
    c(0x105A4, None, "VITHKUQI SMALL LETTER HHA", 0x31, "Vithkuqi"),
    c(0x105A5, None, "VITHKUQI SMALL LETTER I", 0x31, "Vithkuqi"),
    c(0x105A6, None, "VITHKUQI SMALL LETTER IJE", 0x31, "Vithkuqi"),
    c(0x105A7, None, "VITHKUQI SMALL LETTER JE", 0x31, "Vithkuqi"),
    c(0x105A8, None, "VITHKUQI SMALL LETTER KA", 0x31, "Vithkuqi"),
    c(0x105A9, None, "VITHKUQI SMALL LETTER LA", 0x31, "Vithkuqi"),
    c(0x105AA, None, "VITHKUQI SMALL LETTER LLA", 0x31, "Vithkuqi"),
    c(0x105AB, None, "VITHKUQI SMALL LETTER ME", 0x31, "Vithkuqi"),
    c(0x105AC, None, "VITHKUQI SMALL LETTER NE", 0x31, "Vithkuqi"),
    c(0x105AD, None, "VITHKUQI SMALL LETTER NJE", 0x31, "Vithkuqi"),
    c(0x105AE, None, "VITHKUQI SMALL LETTER O", 0x31, "Vithkuqi"),
    c(0x105AF, None, "VITHKUQI SMALL LETTER PE", 0x31, "Vithkuqi"),
    c(0x105B0, None, "VITHKUQI SMALL LETTER QA", 0x31, "Vithkuqi"),
    c(0x105B1, None, "VITHKUQI SMALL LETTER RE", 0x31, "Vithkuqi"),
    c(0x105B3, None, "VITHKUQI SMALL LETTER SE", 0x31, "Vithkuqi"),
    c(0x105B4, None, "VITHKUQI SMALL LETTER SHE", 0x31, "Vithkuqi"),
    c(0x105B5, None, "VITHKUQI SMALL LETTER TE", 0x31, "Vithkuqi"),
    c(0x105B6, None, "VITHKUQI SMALL LETTER THE", 0x31, "Vithkuqi"),
    c(0x105B7, None, "VITHKUQI SMALL LETTER U", 0x31, "Vithkuqi"),
    c(0x105B8, None, "VITHKUQI SMALL LETTER VE", 0x31, "Vithkuqi"),
    c(0x105B9, None, "VITHKUQI SMALL LETTER XE", 0x31, "Vithkuqi"),
    c(0x105BB, None, "VITHKUQI SMALL LETTER Y", 0x31, "Vithkuqi"),
    c(0x105BC, None, "VITHKUQI SMALL LETTER ZE", 0x31, "Vithkuqi"),
    c(0x10600, None, "LINEAR A SIGN AB001", 0x31, "Linear_A"),
    c(0x10601, None, "LINEAR A SIGN AB002", 0x31, "Linear_A"),
    c(0x10602, None, "LINEAR A SIGN AB003", 0x31, "Linear_A"),
    c(0x10603, None, "LINEAR A SIGN AB004", 0x31, "Linear_A"),
    c(0x10604, None, "LINEAR A SIGN AB005", 0x31, "Linear_A"),
    c(0x10605, None, "LINEAR A SIGN AB006", 0x31, "Linear_A"),
    c(0x10606, None, "LINEAR A SIGN AB007", 0x31, "Linear_A"),
    c(0x10607, None, "LINEAR A SIGN AB008", 0x31, "Linear_A"),
    c(0x10608, None, "LINEAR A SIGN AB009", 0x31, "Linear_A"),
    c(0x10609, None, "LINEAR A SIGN AB010", 0x31, "Linear_A"),
    c(0x1060A, None, "LINEAR A SIGN AB011", 0x31, "Linear_A"),
    c(0x1060B, None, "LINEAR A SIGN AB013", 0x31, "Linear_A"),
    c(0x1060C, None, "LINEAR A SIGN AB016", 0x31, "Linear_A"),
    c(0x1060D, None, "LINEAR A SIGN AB017", 0x31, "Linear_A"),
    c(0x1060E, None, "LINEAR A SIGN AB020", 0x31, "Linear_A"),
    c(0x1060F, None, "LINEAR A SIGN AB021", 0x31, "Linear_A"),
    c(0x10610, None, "LINEAR A SIGN AB021F", 0x31, "Linear_A"),
    c(0x10611, None, "LINEAR A SIGN AB021M", 0x31, "Linear_A"),
    c(0x10612, None, "LINEAR A SIGN AB022", 0x31, "Linear_A"),
    c(0x10613, None, "LINEAR A SIGN AB022F", 0x31, "Linear_A"),
    c(0x10614, None, "LINEAR A SIGN AB022M", 0x31, "Linear_A"),
    c(0x10615, None, "LINEAR A SIGN AB023", 0x31, "Linear_A"),
    c(0x10616, None, "LINEAR A SIGN AB023M", 0x31, "Linear_A"),
    c(0x10617, None, "LINEAR A SIGN AB024", 0x31, "Linear_A"),
    c(0x10618, None, "LINEAR A SIGN AB026", 0x31, "Linear_A"),
    c(0x10619, None, "LINEAR A SIGN AB027", 0x31, "Linear_A"),
    c(0x1061A, None, "LINEAR A SIGN AB028", 0x31, "Linear_A"),
    c(0x1061B, None, "LINEAR A SIGN A028B", 0x31, "Linear_A"),
    c(0x1061C, None, "LINEAR A SIGN AB029", 0x31, "Linear_A"),
    c(0x1061D, None, "LINEAR A SIGN AB030", 0x31, "Linear_A"),
    c(0x1061E, None, "LINEAR A SIGN AB031", 0x31, "Linear_A"),
    c(0x1061F, None, "LINEAR A SIGN AB034", 0x31, "Linear_A"),
    c(0x10620, None, "LINEAR A SIGN AB037", 0x31, "Linear_A"),
    c(0x10621, None, "LINEAR A SIGN AB038", 0x31, "Linear_A"),
    c(0x10622, None, "LINEAR A SIGN AB039", 0x31, "Linear_A"),
    c(0x10623, None, "LINEAR A SIGN AB040", 0x31, "Linear_A"),
    c(0x10624, None, "LINEAR A SIGN AB041", 0x31, "Linear_A"),
    c(0x10625, None, "LINEAR A SIGN AB044", 0x31, "Linear_A"),
    c(0x10626, None, "LINEAR A SIGN AB045", 0x31, "Linear_A"),
    c(0x10627, None, "LINEAR A SIGN AB046", 0x31, "Linear_A"),
    c(0x10628, None, "LINEAR A SIGN AB047", 0x31, "Linear_A"),
    c(0x10629, None, "LINEAR A SIGN AB048", 0x31, "Linear_A"),
    c(0x1062A, None, "LINEAR A SIGN AB049", 0x31, "Linear_A"),
    c(0x1062B, None, "LINEAR A SIGN AB050", 0x31, "Linear_A"),
    c(0x1062C, None, "LINEAR A SIGN AB051", 0x31, "Linear_A"),
    c(0x1062D, None, "LINEAR A SIGN AB053", 0x31, "Linear_A"),
    c(0x1062E, None, "LINEAR A SIGN AB054", 0x31, "Linear_A"),
    c(0x1062F, None, "LINEAR A SIGN AB055", 0x31, "Linear_A"),
    c(0x10630, None, "LINEAR A SIGN AB056", 0x31, "Linear_A"),
    c(0x10631, None, "LINEAR A SIGN AB057", 0x31, "Linear_A"),
    c(0x10632, None, "LINEAR A SIGN AB058", 0x31, "Linear_A"),
    c(0x10633, None, "LINEAR A SIGN AB059", 0x31, "Linear_A"),
    c(0x10634, None, "LINEAR A SIGN AB060", 0x31, "Linear_A"),
    c(0x10635, None, "LINEAR A SIGN AB061", 0x31, "Linear_A"),
    c(0x10636, None, "LINEAR A SIGN AB065", 0x31, "Linear_A"),
    c(0x10637, None, "LINEAR A SIGN AB066", 0x31, "Linear_A"),
    c(0x10638, None, "LINEAR A SIGN AB067", 0x31, "Linear_A"),
    c(0x10639, None, "LINEAR A SIGN AB069", 0x31, "Linear_A"),
    c(0x1063A, None, "LINEAR A SIGN AB070", 0x31, "Linear_A"),
    c(0x1063B, None, "LINEAR A SIGN AB073", 0x31, "Linear_A"),
    c(0x1063C, None, "LINEAR A SIGN AB074", 0x31, "Linear_A"),
    c(0x1063D, None, "LINEAR A SIGN AB076", 0x31, "Linear_A"),
    c(0x1063E, None, "LINEAR A SIGN AB077", 0x31, "Linear_A"),
    c(0x1063F, None, "LINEAR A SIGN AB078", 0x31, "Linear_A"),
    c(0x10640, None, "LINEAR A SIGN AB079", 0x31, "Linear_A"),
    c(0x10641, None, "LINEAR A SIGN AB080", 0x31, "Linear_A"),
    c(0x10642, None, "LINEAR A SIGN AB081", 0x31, "Linear_A"),
    c(0x10643, None, "LINEAR A SIGN AB082", 0x31, "Linear_A"),
    c(0x10644, None, "LINEAR A SIGN AB085", 0x31, "Linear_A"),
    c(0x10645, None, "LINEAR A SIGN AB086", 0x31, "Linear_A"),
    c(0x10646, None, "LINEAR A SIGN AB087", 0x31, "Linear_A"),
    c(0x10647, None, "LINEAR A SIGN A100-102", 0x31, "Linear_A"),
    c(0x10648, None, "LINEAR A SIGN AB118", 0x31, "Linear_A"),
    c(0x10649, None, "LINEAR A SIGN AB120", 0x31, "Linear_A"),
    c(0x1064A, None, "LINEAR A SIGN A120B", 0x31, "Linear_A"),
    c(0x1064B, None, "LINEAR A SIGN AB122", 0x31, "Linear_A"),
    c(0x1064C, None, "LINEAR A SIGN AB123", 0x31, "Linear_A"),
    c(0x1064D, None, "LINEAR A SIGN AB131A", 0x31, "Linear_A"),
    c(0x1064E, None, "LINEAR A SIGN AB131B", 0x31, "Linear_A"),
    c(0x1064F, None, "LINEAR A SIGN A131C", 0x31, "Linear_A"),
    c(0x10650, None, "LINEAR A SIGN AB164", 0x31, "Linear_A"),
    c(0x10651, None, "LINEAR A SIGN AB171", 0x31, "Linear_A"),
    c(0x10652, None, "LINEAR A SIGN AB180", 0x31, "Linear_A"),
    c(0x10653, None, "LINEAR A SIGN AB188", 0x31, "Linear_A"),
    c(0x10654, None, "LINEAR A SIGN AB191", 0x31, "Linear_A"),
    c(0x10655, None, "LINEAR A SIGN A301", 0x31, "Linear_A"),
    c(0x10656, None, "LINEAR A SIGN A302", 0x31, "Linear_A"),
    c(0x10657, None, "LINEAR A SIGN A303", 0x31, "Linear_A"),
    c(0x10658, None, "LINEAR A SIGN A304", 0x31, "Linear_A"),
    c(0x10659, None, "LINEAR A SIGN A305", 0x31, "Linear_A"),
    c(0x1065A, None, "LINEAR A SIGN A306", 0x31, "Linear_A"),
    c(0x1065B, None, "LINEAR A SIGN A307", 0x31, "Linear_A"),
    c(0x1065C, None, "LINEAR A SIGN A308", 0x31, "Linear_A"),
    c(0x1065D, None, "LINEAR A SIGN A309A", 0x31, "Linear_A"),
    c(0x1065E, None, "LINEAR A SIGN A309B", 0x31, "Linear_A"),
    c(0x1065F, None, "LINEAR A SIGN A309C", 0x31, "Linear_A"),
    c(0x10660, None, "LINEAR A SIGN A310", 0x31, "Linear_A"),
    c(0x10661, None, "LINEAR A SIGN A311", 0x31, "Linear_A"),
    c(0x10662, None, "LINEAR A SIGN A312", 0x31, "Linear_A"),
    c(0x10663, None, "LINEAR A SIGN A313A", 0x31, "Linear_A"),
    c(0x10664, None, "LINEAR A SIGN A313B", 0x31, "Linear_A"),
    c(0x10665, None, "LINEAR A SIGN A313C", 0x31, "Linear_A"),
    c(0x10666, None, "LINEAR A SIGN A314", 0x31, "Linear_A"),
    c(0x10667, None, "LINEAR A SIGN A315", 0x31, "Linear_A"),
    c(0x10668, None, "LINEAR A SIGN A316", 0x31, "Linear_A"),
    c(0x10669, None, "LINEAR A SIGN A317", 0x31, "Linear_A"),
    c(0x1066A, None, "LINEAR A SIGN A318", 0x31, "Linear_A"),
    c(0x1066B, None, "LINEAR A SIGN A319", 0x31, "Linear_A"),
    c(0x1066C, None, "LINEAR A SIGN A320", 0x31, "Linear_A"),
    c(0x1066D, None, "LINEAR A SIGN A321", 0x31, "Linear_A"),
    c(0x1066E, None, "LINEAR A SIGN A322", 0x31, "Linear_A"),
    c(0x1066F, None, "LINEAR A SIGN A323", 0x31, "Linear_A"),
    c(0x10670, None, "LINEAR A SIGN A324", 0x31, "Linear_A"),
    c(0x10671, None, "LINEAR A SIGN A325", 0x31, "Linear_A"),
    c(0x10672, None, "LINEAR A SIGN A326", 0x31, "Linear_A"),
    c(0x10673, None, "LINEAR A SIGN A327", 0x31, "Linear_A"),
    c(0x10674, None, "LINEAR A SIGN A328", 0x31, "Linear_A"),
    c(0x10675, None, "LINEAR A SIGN A329", 0x31, "Linear_A"),
    c(0x10676, None, "LINEAR A SIGN A330", 0x31, "Linear_A"),
    c(0x10677, None, "LINEAR A SIGN A331", 0x31, "Linear_A"),
    c(0x10678, None, "LINEAR A SIGN A332", 0x31, "Linear_A"),
    c(0x10679, None, "LINEAR A SIGN A333", 0x31, "Linear_A"),
    c(0x1067A, None, "LINEAR A SIGN A334", 0x31, "Linear_A"),
    c(0x1067B, None, "LINEAR A SIGN A335", 0x31, "Linear_A"),
    c(0x1067C, None, "LINEAR A SIGN A336", 0x31, "Linear_A"),
    c(0x1067D, None, "LINEAR A SIGN A337", 0x31, "Linear_A"),
    c(0x1067E, None, "LINEAR A SIGN A338", 0x31, "Linear_A"),
    c(0x1067F, None, "LINEAR A SIGN A339", 0x31, "Linear_A"),
    c(0x10680, None, "LINEAR A SIGN A340", 0x31, "Linear_A"),
    c(0x10681, None, "LINEAR A SIGN A341", 0x31, "Linear_A"),
    c(0x10682, None, "LINEAR A SIGN A342", 0x31, "Linear_A"),
    c(0x10683, None, "LINEAR A SIGN A343", 0x31, "Linear_A"),
    c(0x10684, None, "LINEAR A SIGN A344", 0x31, "Linear_A"),
    c(0x10685, None, "LINEAR A SIGN A345", 0x31, "Linear_A"),
    c(0x10686, None, "LINEAR A SIGN A346", 0x31, "Linear_A"),
    c(0x10687, None, "LINEAR A SIGN A347", 0x31, "Linear_A"),
    c(0x10688, None, "LINEAR A SIGN A348", 0x31, "Linear_A"),
    c(0x10689, None, "LINEAR A SIGN A349", 0x31, "Linear_A"),
    c(0x1068A, None, "LINEAR A SIGN A350", 0x31, "Linear_A"),
    c(0x1068B, None, "LINEAR A SIGN A351", 0x31, "Linear_A"),
    c(0x1068C, None, "LINEAR A SIGN A352", 0x31, "Linear_A"),
    c(0x1068D, None, "LINEAR A SIGN A353", 0x31, "Linear_A"),
    c(0x1068E, None, "LINEAR A SIGN A354", 0x31, "Linear_A"),
    c(0x1068F, None, "LINEAR A SIGN A355", 0x31, "Linear_A"),
    c(0x10690, None, "LINEAR A SIGN A356", 0x31, "Linear_A"),
    c(0x10691, None, "LINEAR A SIGN A357", 0x31, "Linear_A"),
    c(0x10692, None, "LINEAR A SIGN A358", 0x31, "Linear_A"),
    c(0x10693, None, "LINEAR A SIGN A359", 0x31, "Linear_A"),
    c(0x10694, None, "LINEAR A SIGN A360", 0x31, "Linear_A"),
    c(0x10695, None, "LINEAR A SIGN A361", 0x31, "Linear_A"),
    c(0x10696, None, "LINEAR A SIGN A362", 0x31, "Linear_A"),
    c(0x10697, None, "LINEAR A SIGN A363", 0x31, "Linear_A"),
    c(0x10698, None, "LINEAR A SIGN A364", 0x31, "Linear_A"),
    c(0x10699, None, "LINEAR A SIGN A365", 0x31, "Linear_A"),
    c(0x1069A, None, "LINEAR A SIGN A366", 0x31, "Linear_A"),
    c(0x1069B, None, "LINEAR A SIGN A367", 0x31, "Linear_A"),
    c(0x1069C, None, "LINEAR A SIGN A368", 0x31, "Linear_A"),
    c(0x1069D, None, "LINEAR A SIGN A369", 0x31, "Linear_A"),
    c(0x1069E, None, "LINEAR A SIGN A370", 0x31, "Linear_A"),
    c(0x1069F, None, "LINEAR A SIGN A371", 0x31, "Linear_A"),
    c(0x106A0, None, "LINEAR A SIGN A400-VAS", 0x31, "Linear_A"),
    c(0x106A1, None, "LINEAR A SIGN A401-VAS", 0x31, "Linear_A"),
    c(0x106A2, None, "LINEAR A SIGN A402-VAS", 0x31, "Linear_A"),
    c(0x106A3, None, "LINEAR A SIGN A403-VAS", 0x31, "Linear_A"),
    c(0x106A4, None, "LINEAR A SIGN A404-VAS", 0x31, "Linear_A"),
    c(0x106A5, None, "LINEAR A SIGN A405-VAS", 0x31, "Linear_A"),
    c(0x106A6, None, "LINEAR A SIGN A406-VAS", 0x31, "Linear_A"),
    c(0x106A7, None, "LINEAR A SIGN A407-VAS", 0x31, "Linear_A"),
    c(0x106A8, None, "LINEAR A SIGN A408-VAS", 0x31, "Linear_A"),
    c(0x106A9, None, "LINEAR A SIGN A409-VAS", 0x31, "Linear_A"),
    c(0x106AA, None, "LINEAR A SIGN A410-VAS", 0x31, "Linear_A"),
    c(0x106AB, None, "LINEAR A SIGN A411-VAS", 0x31, "Linear_A"),
    c(0x106AC, None, "LINEAR A SIGN A412-VAS", 0x31, "Linear_A"),
    c(0x106AD, None, "LINEAR A SIGN A413-VAS", 0x31, "Linear_A"),
    c(0x106AE, None, "LINEAR A SIGN A414-VAS", 0x31, "Linear_A"),
    c(0x106AF, None, "LINEAR A SIGN A415-VAS", 0x31, "Linear_A"),
    c(0x106B0, None, "LINEAR A SIGN A416-VAS", 0x31, "Linear_A"),
    c(0x106B1, None, "LINEAR A SIGN A417-VAS", 0x31, "Linear_A"),
    c(0x106B2, None, "LINEAR A SIGN A418-VAS", 0x31, "Linear_A"),
    c(0x106B3, None, "LINEAR A SIGN A501", 0x31, "Linear_A"),
    c(0x106B4, None, "LINEAR A SIGN A502", 0x31, "Linear_A"),
    c(0x106B5, None, "LINEAR A SIGN A503", 0x31, "Linear_A"),
    c(0x106B6, None, "LINEAR A SIGN A504", 0x31, "Linear_A"),
    c(0x106B7, None, "LINEAR A SIGN A505", 0x31, "Linear_A"),
    c(0x106B8, None, "LINEAR A SIGN A506", 0x31, "Linear_A"),
    c(0x106B9, None, "LINEAR A SIGN A508", 0x31, "Linear_A"),
    c(0x106BA, None, "LINEAR A SIGN A509", 0x31, "Linear_A"),
    c(0x106BB, None, "LINEAR A SIGN A510", 0x31, "Linear_A"),
    c(0x106BC, None, "LINEAR A SIGN A511", 0x31, "Linear_A"),
    c(0x106BD, None, "LINEAR A SIGN A512", 0x31, "Linear_A"),
    c(0x106BE, None, "LINEAR A SIGN A513", 0x31, "Linear_A"),
    c(0x106BF, None, "LINEAR A SIGN A515", 0x31, "Linear_A"),
    c(0x106C0, None, "LINEAR A SIGN A516", 0x31, "Linear_A"),
    c(0x106C1, None, "LINEAR A SIGN A520", 0x31, "Linear_A"),
    c(0x106C2, None, "LINEAR A SIGN A521", 0x31, "Linear_A"),
    c(0x106C3, None, "LINEAR A SIGN A523", 0x31, "Linear_A"),
    c(0x106C4, None, "LINEAR A SIGN A524", 0x31, "Linear_A"),
    c(0x106C5, None, "LINEAR A SIGN A525", 0x31, "Linear_A"),
    c(0x106C6, None, "LINEAR A SIGN A526", 0x31, "Linear_A"),
    c(0x106C7, None, "LINEAR A SIGN A527", 0x31, "Linear_A"),
    c(0x106C8, None, "LINEAR A SIGN A528", 0x31, "Linear_A"),
    c(0x106C9, None, "LINEAR A SIGN A529", 0x31, "Linear_A"),
    c(0x106CA, None, "LINEAR A SIGN A530", 0x31, "Linear_A"),
    c(0x106CB, None, "LINEAR A SIGN A531", 0x31, "Linear_A"),
    c(0x106CC, None, "LINEAR A SIGN A532", 0x31, "Linear_A"),
    c(0x106CD, None, "LINEAR A SIGN A534", 0x31, "Linear_A"),
    c(0x106CE, None, "LINEAR A SIGN A535", 0x31, "Linear_A"),
    c(0x106CF, None, "LINEAR A SIGN A536", 0x31, "Linear_A"),
    c(0x106D0, None, "LINEAR A SIGN A537", 0x31, "Linear_A"),
    c(0x106D1, None, "LINEAR A SIGN A538", 0x31, "Linear_A"),
    c(0x106D2, None, "LINEAR A SIGN A539", 0x31, "Linear_A"),
    c(0x106D3, None, "LINEAR A SIGN A540", 0x31, "Linear_A"),
    c(0x106D4, None, "LINEAR A SIGN A541", 0x31, "Linear_A"),
    c(0x106D5, None, "LINEAR A SIGN A542", 0x31, "Linear_A"),
    c(0x106D6, None, "LINEAR A SIGN A545", 0x31, "Linear_A"),
    c(0x106D7, None, "LINEAR A SIGN A547", 0x31, "Linear_A"),
    c(0x106D8, None, "LINEAR A SIGN A548", 0x31, "Linear_A"),
    c(0x106D9, None, "LINEAR A SIGN A549", 0x31, "Linear_A"),
    c(0x106DA, None, "LINEAR A SIGN A550", 0x31, "Linear_A"),
    c(0x106DB, None, "LINEAR A SIGN A551", 0x31, "Linear_A"),
    c(0x106DC, None, "LINEAR A SIGN A552", 0x31, "Linear_A"),
    c(0x106DD, None, "LINEAR A SIGN A553", 0x31, "Linear_A"),
    c(0x106DE, None, "LINEAR A SIGN A554", 0x31, "Linear_A"),
    c(0x106DF, None, "LINEAR A SIGN A555", 0x31, "Linear_A"),
    c(0x106E0, None, "LINEAR A SIGN A556", 0x31, "Linear_A"),
    c(0x106E1, None, "LINEAR A SIGN A557", 0x31, "Linear_A"),
    c(0x106E2, None, "LINEAR A SIGN A559", 0x31, "Linear_A"),
    c(0x106E3, None, "LINEAR A SIGN A563", 0x31, "Linear_A"),
    c(0x106E4, None, "LINEAR A SIGN A564", 0x31, "Linear_A"),
    c(0x106E5, None, "LINEAR A SIGN A565", 0x31, "Linear_A"),
    c(0x106E6, None, "LINEAR A SIGN A566", 0x31, "Linear_A"),
    c(0x106E7, None, "LINEAR A SIGN A568", 0x31, "Linear_A"),
    c(0x106E8, None, "LINEAR A SIGN A569", 0x31, "Linear_A"),
    c(0x106E9, None, "LINEAR A SIGN A570", 0x31, "Linear_A"),
    c(0x106EA, None, "LINEAR A SIGN A571", 0x31, "Linear_A"),
    c(0x106EB, None, "LINEAR A SIGN A572", 0x31, "Linear_A"),
    c(0x106EC, None, "LINEAR A SIGN A573", 0x31, "Linear_A"),
    c(0x106ED, None, "LINEAR A SIGN A574", 0x31, "Linear_A"),
    c(0x106EE, None, "LINEAR A SIGN A575", 0x31, "Linear_A"),
    c(0x106EF, None, "LINEAR A SIGN A576", 0x31, "Linear_A"),
    c(0x106F0, None, "LINEAR A SIGN A577", 0x31, "Linear_A"),
    c(0x106F1, None, "LINEAR A SIGN A578", 0x31, "Linear_A"),
    c(0x106F2, None, "LINEAR A SIGN A579", 0x31, "Linear_A"),
    c(0x106F3, None, "LINEAR A SIGN A580", 0x31, "Linear_A"),
    c(0x106F4, None, "LINEAR A SIGN A581", 0x31, "Linear_A"),
    c(0x106F5, None, "LINEAR A SIGN A582", 0x31, "Linear_A"),
    c(0x106F6, None, "LINEAR A SIGN A583", 0x31, "Linear_A"),
    c(0x106F7, None, "LINEAR A SIGN A584", 0x31, "Linear_A"),
    c(0x106F8, None, "LINEAR A SIGN A585", 0x31, "Linear_A"),
    c(0x106F9, None, "LINEAR A SIGN A586", 0x31, "Linear_A"),
    c(0x106FA, None, "LINEAR A SIGN A587", 0x31, "Linear_A"),
    c(0x106FB, None, "LINEAR A SIGN A588", 0x31, "Linear_A"),
    c(0x106FC, None, "LINEAR A SIGN A589", 0x31, "Linear_A"),
    c(0x106FD, None, "LINEAR A SIGN A591", 0x31, "Linear_A"),
    c(0x106FE, None, "LINEAR A SIGN A592", 0x31, "Linear_A"),
    c(0x106FF, None, "LINEAR A SIGN A594", 0x31, "Linear_A"),
    c(0x10700, None, "LINEAR A SIGN A595", 0x31, "Linear_A"),
    c(0x10701, None, "LINEAR A SIGN A596", 0x31, "Linear_A"),
    c(0x10702, None, "LINEAR A SIGN A598", 0x31, "Linear_A"),
    c(0x10703, None, "LINEAR A SIGN A600", 0x31, "Linear_A"),
    c(0x10704, None, "LINEAR A SIGN A601", 0x31, "Linear_A"),
    c(0x10705, None, "LINEAR A SIGN A602", 0x31, "Linear_A"),
    c(0x10706, None, "LINEAR A SIGN A603", 0x31, "Linear_A"),
    c(0x10707, None, "LINEAR A SIGN A604", 0x31, "Linear_A"),
    c(0x10708, None, "LINEAR A SIGN A606", 0x31, "Linear_A"),
    c(0x10709, None, "LINEAR A SIGN A608", 0x31, "Linear_A"),
    c(0x1070A, None, "LINEAR A SIGN A609", 0x31, "Linear_A"),
    c(0x1070B, None, "LINEAR A SIGN A610", 0x31, "Linear_A"),
    c(0x1070C, None, "LINEAR A SIGN A611", 0x31, "Linear_A"),
    c(0x1070D, None, "LINEAR A SIGN A612", 0x31, "Linear_A"),
    c(0x1070E, None, "LINEAR A SIGN A613", 0x31, "Linear_A"),
    c(0x1070F, None, "LINEAR A SIGN A614", 0x31, "Linear_A"),
    c(0x10710, None, "LINEAR A SIGN A615", 0x31, "Linear_A"),
    c(0x10711, None, "LINEAR A SIGN A616", 0x31, "Linear_A"),
    c(0x10712, None, "LINEAR A SIGN A617", 0x31, "Linear_A"),
    c(0x10713, None, "LINEAR A SIGN A618", 0x31, "Linear_A"),
    c(0x10714, None, "LINEAR A SIGN A619", 0x31, "Linear_A"),
    c(0x10715, None, "LINEAR A SIGN A620", 0x31, "Linear_A"),
    c(0x10716, None, "LINEAR A SIGN A621", 0x31, "Linear_A"),
    c(0x10717, None, "LINEAR A SIGN A622", 0x31, "Linear_A"),
    c(0x10718, None, "LINEAR A SIGN A623", 0x31, "Linear_A"),
    c(0x10719, None, "LINEAR A SIGN A624", 0x31, "Linear_A"),
    c(0x1071A, None, "LINEAR A SIGN A626", 0x31, "Linear_A"),
    c(0x1071B, None, "LINEAR A SIGN A627", 0x31, "Linear_A"),
    c(0x1071C, None, "LINEAR A SIGN A628", 0x31, "Linear_A"),
    c(0x1071D, None, "LINEAR A SIGN A629", 0x31, "Linear_A"),
    c(0x1071E, None, "LINEAR A SIGN A634", 0x31, "Linear_A"),
    c(0x1071F, None, "LINEAR A SIGN A637", 0x31, "Linear_A"),
    c(0x10720, None, "LINEAR A SIGN A638", 0x31, "Linear_A"),
    c(0x10721, None, "LINEAR A SIGN A640", 0x31, "Linear_A"),
    c(0x10722, None, "LINEAR A SIGN A642", 0x31, "Linear_A"),
    c(0x10723, None, "LINEAR A SIGN A643", 0x31, "Linear_A"),
    c(0x10724, None, "LINEAR A SIGN A644", 0x31, "Linear_A"),
    c(0x10725, None, "LINEAR A SIGN A645", 0x31, "Linear_A"),
    c(0x10726, None, "LINEAR A SIGN A646", 0x31, "Linear_A"),
    c(0x10727, None, "LINEAR A SIGN A648", 0x31, "Linear_A"),
    c(0x10728, None, "LINEAR A SIGN A649", 0x31, "Linear_A"),
    c(0x10729, None, "LINEAR A SIGN A651", 0x31, "Linear_A"),
    c(0x1072A, None, "LINEAR A SIGN A652", 0x31, "Linear_A"),
    c(0x1072B, None, "LINEAR A SIGN A653", 0x31, "Linear_A"),
    c(0x1072C, None, "LINEAR A SIGN A654", 0x31, "Linear_A"),
    c(0x1072D, None, "LINEAR A SIGN A655", 0x31, "Linear_A"),
    c(0x1072E, None, "LINEAR A SIGN A656", 0x31, "Linear_A"),
    c(0x1072F, None, "LINEAR A SIGN A657", 0x31, "Linear_A"),
    c(0x10730, None, "LINEAR A SIGN A658", 0x31, "Linear_A"),
    c(0x10731, None, "LINEAR A SIGN A659", 0x31, "Linear_A"),
    c(0x10732, None, "LINEAR A SIGN A660", 0x31, "Linear_A"),
    c(0x10733, None, "LINEAR A SIGN A661", 0x31, "Linear_A"),
    c(0x10734, None, "LINEAR A SIGN A662", 0x31, "Linear_A"),
    c(0x10735, None, "LINEAR A SIGN A663", 0x31, "Linear_A"),
    c(0x10736, None, "LINEAR A SIGN A664", 0x31, "Linear_A"),
    c(0x10740, None, "LINEAR A SIGN A701 A", 0x31, "Linear_A"),
    c(0x10741, None, "LINEAR A SIGN A702 B", 0x31, "Linear_A"),
    c(0x10742, None, "LINEAR A SIGN A703 D", 0x31, "Linear_A"),
    c(0x10743, None, "LINEAR A SIGN A704 E", 0x31, "Linear_A"),
    c(0x10744, None, "LINEAR A SIGN A705 F", 0x31, "Linear_A"),
    c(0x10745, None, "LINEAR A SIGN A706 H", 0x31, "Linear_A"),
    c(0x10746, None, "LINEAR A SIGN A707 J", 0x31, "Linear_A"),
    c(0x10747, None, "LINEAR A SIGN A708 K", 0x31, "Linear_A"),
    c(0x10748, None, "LINEAR A SIGN A709 L", 0x31, "Linear_A"),
    c(0x10749, None, "LINEAR A SIGN A709-2 L2", 0x31, "Linear_A"),
    c(0x1074A, None, "LINEAR A SIGN A709-3 L3", 0x31, "Linear_A"),
    c(0x1074B, None, "LINEAR A SIGN A709-4 L4", 0x31, "Linear_A"),
    c(0x1074C, None, "LINEAR A SIGN A709-6 L6", 0x31, "Linear_A"),
    c(0x1074D, None, "LINEAR A SIGN A710 W", 0x31, "Linear_A"),
    c(0x1074E, None, "LINEAR A SIGN A711 X", 0x31, "Linear_A"),
    c(0x1074F, None, "LINEAR A SIGN A712 Y", 0x31, "Linear_A"),
    c(0x10750, None, "LINEAR A SIGN A713 OMEGA", 0x31, "Linear_A"),
    c(0x10751, None, "LINEAR A SIGN A714 ABB", 0x31, "Linear_A"),
    c(0x10752, None, "LINEAR A SIGN A715 BB", 0x31, "Linear_A"),
    c(0x10753, None, "LINEAR A SIGN A717 DD", 0x31, "Linear_A"),
    c(0x10754, None, "LINEAR A SIGN A726 EYYY", 0x31, "Linear_A"),
    c(0x10755, None, "LINEAR A SIGN A732 JE", 0x31, "Linear_A"),
    c(0x10760, None, "LINEAR A SIGN A800", 0x31, "Linear_A"),
    c(0x10761, None, "LINEAR A SIGN A801", 0x31, "Linear_A"),
    c(0x10762, None, "LINEAR A SIGN A802", 0x31, "Linear_A"),
    c(0x10763, None, "LINEAR A SIGN A803", 0x31, "Linear_A"),
    c(0x10764, None, "LINEAR A SIGN A804", 0x31, "Linear_A"),
    c(0x10765, None, "LINEAR A SIGN A805", 0x31, "Linear_A"),
    c(0x10766, None, "LINEAR A SIGN A806", 0x31, "Linear_A"),
    c(0x10767, None, "LINEAR A SIGN A807", 0x31, "Linear_A"),
    c(0x10780, None, "MODIFIER LETTER SMALL CAPITAL AA", 0x31, "Latin_Ext_F"),
    c(0x10781, None, "MODIFIER LETTER SUPERSCRIPT TRIANGULAR COLON", 0x31, "Latin_Ext_F"),
    c(0x10782, None, "MODIFIER LETTER SUPERSCRIPT HALF TRIANGULAR COLON", 0x31, "Latin_Ext_F"),
    c(0x10783, None, "MODIFIER LETTER SMALL AE", 0x31, "Latin_Ext_F"),
    c(0x10784, None, "MODIFIER LETTER SMALL CAPITAL B", 0x31, "Latin_Ext_F"),
    c(0x10785, None, "MODIFIER LETTER SMALL B WITH HOOK", 0x31, "Latin_Ext_F"),
    c(0x10787, None, "MODIFIER LETTER SMALL DZ DIGRAPH", 0x31, "Latin_Ext_F"),
    c(0x10788, None, "MODIFIER LETTER SMALL DZ DIGRAPH WITH RETROFLEX HOOK", 0x31, "Latin_Ext_F"),
    c(0x10789, None, "MODIFIER LETTER SMALL DZ DIGRAPH WITH CURL", 0x31, "Latin_Ext_F"),
    c(0x1078A, None, "MODIFIER LETTER SMALL DEZH DIGRAPH", 0x31, "Latin_Ext_F"),
    c(0x1078B, None, "MODIFIER LETTER SMALL D WITH TAIL", 0x31, "Latin_Ext_F"),
    c(0x1078C, None, "MODIFIER LETTER SMALL D WITH HOOK", 0x31, "Latin_Ext_F"),
    c(0x1078D, None, "MODIFIER LETTER SMALL D WITH HOOK AND TAIL", 0x31, "Latin_Ext_F"),
    c(0x1078E, None, "MODIFIER LETTER SMALL REVERSED E", 0x31, "Latin_Ext_F"),
    c(0x1078F, None, "MODIFIER LETTER SMALL CLOSED REVERSED OPEN E", 0x31, "Latin_Ext_F"),
    c(0x10790, None, "MODIFIER LETTER SMALL FENG DIGRAPH", 0x31, "Latin_Ext_F"),
    c(0x10791, None, "MODIFIER LETTER SMALL RAMS HORN", 0x31, "Latin_Ext_F"),
    c(0x10792, None, "MODIFIER LETTER SMALL CAPITAL G", 0x31, "Latin_Ext_F"),
    c(0x10793, None, "MODIFIER LETTER SMALL G WITH HOOK", 0x31, "Latin_Ext_F"),
    c(0x10794, None, "MODIFIER LETTER SMALL CAPITAL G WITH HOOK", 0x31, "Latin_Ext_F"),
    c(0x10795, None, "MODIFIER LETTER SMALL H WITH STROKE", 0x31, "Latin_Ext_F"),
    c(0x10796, None, "MODIFIER LETTER SMALL CAPITAL H", 0x31, "Latin_Ext_F"),
    c(0x10797, None, "MODIFIER LETTER SMALL HENG WITH HOOK", 0x31, "Latin_Ext_F"),
    c(0x10798, None, "MODIFIER LETTER SMALL DOTLESS J WITH STROKE AND HOOK", 0x31, "Latin_Ext_F"),
    c(0x10799, None, "MODIFIER LETTER SMALL LS DIGRAPH", 0x31, "Latin_Ext_F"),
    c(0x1079A, None, "MODIFIER LETTER SMALL LZ DIGRAPH", 0x31, "Latin_Ext_F"),
    c(0x1079B, None, "MODIFIER LETTER SMALL L WITH BELT", 0x31, "Latin_Ext_F"),
    c(0x1079C, None, "MODIFIER LETTER SMALL CAPITAL L WITH BELT", 0x31, "Latin_Ext_F"),
    c(0x1079D, None, "MODIFIER LETTER SMALL L WITH RETROFLEX HOOK AND BELT", 0x31, "Latin_Ext_F"),
    c(0x1079E, None, "MODIFIER LETTER SMALL LEZH", 0x31, "Latin_Ext_F"),
    c(0x1079F, None, "MODIFIER LETTER SMALL LEZH WITH RETROFLEX HOOK", 0x31, "Latin_Ext_F"),
    c(0x107A0, None, "MODIFIER LETTER SMALL TURNED Y", 0x31, "Latin_Ext_F"),
    c(0x107A1, None, "MODIFIER LETTER SMALL TURNED Y WITH BELT", 0x31, "Latin_Ext_F"),
    c(0x107A2, None, "MODIFIER LETTER SMALL O WITH STROKE", 0x31, "Latin_Ext_F"),
    c(0x107A3, None, "MODIFIER LETTER SMALL CAPITAL OE", 0x31, "Latin_Ext_F"),
    c(0x107A4, None, "MODIFIER LETTER SMALL CLOSED OMEGA", 0x31, "Latin_Ext_F"),
    c(0x107A5, None, "MODIFIER LETTER SMALL Q", 0x31, "Latin_Ext_F"),
    c(0x107A6, None, "MODIFIER LETTER SMALL TURNED R WITH LONG LEG", 0x31, "Latin_Ext_F"),
    c(0x107A7, None, "MODIFIER LETTER SMALL TURNED R WITH LONG LEG AND RETROFLEX HOOK", 0x31, "Latin_Ext_F"),
    c(0x107A8, None, "MODIFIER LETTER SMALL R WITH TAIL", 0x31, "Latin_Ext_F"),
    c(0x107A9, None, "MODIFIER LETTER SMALL R WITH FISHHOOK", 0x31, "Latin_Ext_F"),
    c(0x107AA, None, "MODIFIER LETTER SMALL CAPITAL R", 0x31, "Latin_Ext_F"),
    c(0x107AB, None, "MODIFIER LETTER SMALL TC DIGRAPH WITH CURL", 0x31, "Latin_Ext_F"),
    c(0x107AC, None, "MODIFIER LETTER SMALL TS DIGRAPH", 0x31, "Latin_Ext_F"),
    c(0x107AD, None, "MODIFIER LETTER SMALL TS DIGRAPH WITH RETROFLEX HOOK", 0x31, "Latin_Ext_F"),
    c(0x107AE, None, "MODIFIER LETTER SMALL TESH DIGRAPH", 0x31, "Latin_Ext_F"),
    c(0x107AF, None, "MODIFIER LETTER SMALL T WITH RETROFLEX HOOK", 0x31, "Latin_Ext_F"),
    c(0x107B0, None, "MODIFIER LETTER SMALL V WITH RIGHT HOOK", 0x31, "Latin_Ext_F"),
    c(0x107B2, None, "MODIFIER LETTER SMALL CAPITAL Y", 0x31, "Latin_Ext_F"),
    c(0x107B3, None, "MODIFIER LETTER GLOTTAL STOP WITH STROKE", 0x31, "Latin_Ext_F"),
    c(0x107B4, None, "MODIFIER LETTER REVERSED GLOTTAL STOP WITH STROKE", 0x31, "Latin_Ext_F"),
    c(0x107B5, None, "MODIFIER LETTER BILABIAL CLICK", 0x31, "Latin_Ext_F"),
    c(0x107B6, None, "MODIFIER LETTER DENTAL CLICK", 0x31, "Latin_Ext_F"),
    c(0x107B7, None, "MODIFIER LETTER LATERAL CLICK", 0x31, "Latin_Ext_F"),
    c(0x107B8, None, "MODIFIER LETTER ALVEOLAR CLICK", 0x31, "Latin_Ext_F"),
    c(0x107B9, None, "MODIFIER LETTER RETROFLEX CLICK WITH RETROFLEX HOOK", 0x31, "Latin_Ext_F"),
    c(0x107BA, None, "MODIFIER LETTER SMALL S WITH CURL", 0x31, "Latin_Ext_F"),
    c(0x10800, None, "CYPRIOT SYLLABLE A", 0x31, "Cypriot_Syllabary"),
    c(0x10801, None, "CYPRIOT SYLLABLE E", 0x31, "Cypriot_Syllabary"),
    c(0x10802, None, "CYPRIOT SYLLABLE I", 0x31, "Cypriot_Syllabary"),
    c(0x10803, None, "CYPRIOT SYLLABLE O", 0x31, "Cypriot_Syllabary"),
    c(0x10804, None, "CYPRIOT SYLLABLE U", 0x31, "Cypriot_Syllabary"),
    c(0x10805, None, "CYPRIOT SYLLABLE JA", 0x31, "Cypriot_Syllabary"),
    c(0x10808, None, "CYPRIOT SYLLABLE JO", 0x31, "Cypriot_Syllabary"),
    c(0x1080A, None, "CYPRIOT SYLLABLE KA", 0x31, "Cypriot_Syllabary"),
    c(0x1080B, None, "CYPRIOT SYLLABLE KE", 0x31, "Cypriot_Syllabary"),
    c(0x1080C, None, "CYPRIOT SYLLABLE KI", 0x31, "Cypriot_Syllabary"),
    c(0x1080D, None, "CYPRIOT SYLLABLE KO", 0x31, "Cypriot_Syllabary"),
    c(0x1080E, None, "CYPRIOT SYLLABLE KU", 0x31, "Cypriot_Syllabary"),
    c(0x1080F, None, "CYPRIOT SYLLABLE LA", 0x31, "Cypriot_Syllabary"),
    c(0x10810, None, "CYPRIOT SYLLABLE LE", 0x31, "Cypriot_Syllabary"),
    c(0x10811, None, "CYPRIOT SYLLABLE LI", 0x31, "Cypriot_Syllabary"),
    c(0x10812, None, "CYPRIOT SYLLABLE LO", 0x31, "Cypriot_Syllabary"),
    c(0x10813, None, "CYPRIOT SYLLABLE LU", 0x31, "Cypriot_Syllabary"),
    c(0x10814, None, "CYPRIOT SYLLABLE MA", 0x31, "Cypriot_Syllabary"),
    c(0x10815, None, "CYPRIOT SYLLABLE ME", 0x31, "Cypriot_Syllabary"),
    c(0x10816, None, "CYPRIOT SYLLABLE MI", 0x31, "Cypriot_Syllabary"),
    c(0x10817, None, "CYPRIOT SYLLABLE MO", 0x31, "Cypriot_Syllabary"),
    c(0x10818, None, "CYPRIOT SYLLABLE MU", 0x31, "Cypriot_Syllabary"),
    c(0x10819, None, "CYPRIOT SYLLABLE NA", 0x31, "Cypriot_Syllabary"),
    c(0x1081A, None, "CYPRIOT SYLLABLE NE", 0x31, "Cypriot_Syllabary"),
    c(0x1081B, None, "CYPRIOT SYLLABLE NI", 0x31, "Cypriot_Syllabary"),
    c(0x1081C, None, "CYPRIOT SYLLABLE NO", 0x31, "Cypriot_Syllabary"),
    c(0x1081D, None, "CYPRIOT SYLLABLE NU", 0x31, "Cypriot_Syllabary"),
    c(0x1081E, None, "CYPRIOT SYLLABLE PA", 0x31, "Cypriot_Syllabary"),
    c(0x1081F, None, "CYPRIOT SYLLABLE PE", 0x31, "Cypriot_Syllabary"),
    c(0x10820, None, "CYPRIOT SYLLABLE PI", 0x31, "Cypriot_Syllabary"),
    c(0x10821, None, "CYPRIOT SYLLABLE PO", 0x31, "Cypriot_Syllabary"),
    c(0x10822, None, "CYPRIOT SYLLABLE PU", 0x31, "Cypriot_Syllabary"),
    c(0x10823, None, "CYPRIOT SYLLABLE RA", 0x31, "Cypriot_Syllabary"),
    c(0x10824, None, "CYPRIOT SYLLABLE RE", 0x31, "Cypriot_Syllabary"),
    c(0x10825, None, "CYPRIOT SYLLABLE RI", 0x31, "Cypriot_Syllabary"),
    c(0x10826, None, "CYPRIOT SYLLABLE RO", 0x31, "Cypriot_Syllabary"),
    c(0x10827, None, "CYPRIOT SYLLABLE RU", 0x31, "Cypriot_Syllabary"),
    c(0x10828, None, "CYPRIOT SYLLABLE SA", 0x31, "Cypriot_Syllabary"),
    c(0x10829, None, "CYPRIOT SYLLABLE SE", 0x31, "Cypriot_Syllabary"),
    c(0x1082A, None, "CYPRIOT SYLLABLE SI", 0x31, "Cypriot_Syllabary"),
    c(0x1082B, None, "CYPRIOT SYLLABLE SO", 0x31, "Cypriot_Syllabary"),
    c(0x1082C, None, "CYPRIOT SYLLABLE SU", 0x31, "Cypriot_Syllabary"),
    c(0x1082D, None, "CYPRIOT SYLLABLE TA", 0x31, "Cypriot_Syllabary"),
    c(0x1082E, None, "CYPRIOT SYLLABLE TE", 0x31, "Cypriot_Syllabary"),
    c(0x1082F, None, "CYPRIOT SYLLABLE TI", 0x31, "Cypriot_Syllabary"),
    c(0x10830, None, "CYPRIOT SYLLABLE TO", 0x31, "Cypriot_Syllabary"),
    c(0x10831, None, "CYPRIOT SYLLABLE TU", 0x31, "Cypriot_Syllabary"),
    c(0x10832, None, "CYPRIOT SYLLABLE WA", 0x31, "Cypriot_Syllabary"),
    c(0x10833, None, "CYPRIOT SYLLABLE WE", 0x31, "Cypriot_Syllabary"),
    c(0x10834, None, "CYPRIOT SYLLABLE WI", 0x31, "Cypriot_Syllabary"),
    c(0x10835, None, "CYPRIOT SYLLABLE WO", 0x31, "Cypriot_Syllabary"),
    c(0x10837, None, "CYPRIOT SYLLABLE XA", 0x31, "Cypriot_Syllabary"),
    c(0x10838, None, "CYPRIOT SYLLABLE XE", 0x31, "Cypriot_Syllabary"),
    c(0x1083C, None, "CYPRIOT SYLLABLE ZA", 0x31, "Cypriot_Syllabary"),
    c(0x1083F, None, "CYPRIOT SYLLABLE ZO", 0x31, "Cypriot_Syllabary"),
    c(0x10840, None, "IMPERIAL ARAMAIC LETTER ALEPH", 0x31, "Imperial_Aramaic"),
    c(0x10841, None, "IMPERIAL ARAMAIC LETTER BETH", 0x31, "Imperial_Aramaic"),
    c(0x10842, None, "IMPERIAL ARAMAIC LETTER GIMEL", 0x31, "Imperial_Aramaic"),
    c(0x10843, None, "IMPERIAL ARAMAIC LETTER DALETH", 0x31, "Imperial_Aramaic"),
    c(0x10844, None, "IMPERIAL ARAMAIC LETTER HE", 0x31, "Imperial_Aramaic"),
    c(0x10845, None, "IMPERIAL ARAMAIC LETTER WAW", 0x31, "Imperial_Aramaic"),
    c(0x10846, None, "IMPERIAL ARAMAIC LETTER ZAYIN", 0x31, "Imperial_Aramaic"),
    c(0x10847, None, "IMPERIAL ARAMAIC LETTER HETH", 0x31, "Imperial_Aramaic"),
    c(0x10848, None, "IMPERIAL ARAMAIC LETTER TETH", 0x31, "Imperial_Aramaic"),
    c(0x10849, None, "IMPERIAL ARAMAIC LETTER YODH", 0x31, "Imperial_Aramaic"),
    c(0x1084A, None, "IMPERIAL ARAMAIC LETTER KAPH", 0x31, "Imperial_Aramaic"),
    c(0x1084B, None, "IMPERIAL ARAMAIC LETTER LAMEDH", 0x31, "Imperial_Aramaic"),
    c(0x1084C, None, "IMPERIAL ARAMAIC LETTER MEM", 0x31, "Imperial_Aramaic"),
    c(0x1084D, None, "IMPERIAL ARAMAIC LETTER NUN", 0x31, "Imperial_Aramaic"),
    c(0x1084E, None, "IMPERIAL ARAMAIC LETTER SAMEKH", 0x31, "Imperial_Aramaic"),
    c(0x1084F, None, "IMPERIAL ARAMAIC LETTER AYIN", 0x31, "Imperial_Aramaic"),
    c(0x10850, None, "IMPERIAL ARAMAIC LETTER PE", 0x31, "Imperial_Aramaic"),
    c(0x10851, None, "IMPERIAL ARAMAIC LETTER SADHE", 0x31, "Imperial_Aramaic"),
    c(0x10852, None, "IMPERIAL ARAMAIC LETTER QOPH", 0x31, "Imperial_Aramaic"),
    c(0x10853, None, "IMPERIAL ARAMAIC LETTER RESH", 0x31, "Imperial_Aramaic"),
    c(0x10854, None, "IMPERIAL ARAMAIC LETTER SHIN", 0x31, "Imperial_Aramaic"),
    c(0x10855, None, "IMPERIAL ARAMAIC LETTER TAW", 0x31, "Imperial_Aramaic"),
    c(0x10857, None, "IMPERIAL ARAMAIC SECTION SIGN", 0x00, "Imperial_Aramaic"),
    c(0x10858, None, "IMPERIAL ARAMAIC NUMBER ONE", 0x00, "Imperial_Aramaic"),
    c(0x10859, None, "IMPERIAL ARAMAIC NUMBER TWO", 0x00, "Imperial_Aramaic"),
    c(0x1085A, None, "IMPERIAL ARAMAIC NUMBER THREE", 0x00, "Imperial_Aramaic"),
    c(0x1085B, None, "IMPERIAL ARAMAIC NUMBER TEN", 0x00, "Imperial_Aramaic"),
    c(0x1085C, None, "IMPERIAL ARAMAIC NUMBER TWENTY", 0x00, "Imperial_Aramaic"),
    c(0x1085D, None, "IMPERIAL ARAMAIC NUMBER ONE HUNDRED", 0x00, "Imperial_Aramaic"),
    c(0x1085E, None, "IMPERIAL ARAMAIC NUMBER ONE THOUSAND", 0x00, "Imperial_Aramaic"),
    c(0x1085F, None, "IMPERIAL ARAMAIC NUMBER TEN THOUSAND", 0x00, "Imperial_Aramaic"),
    c(0x10860, None, "PALMYRENE LETTER ALEPH", 0x31, "Palmyrene"),
    c(0x10861, None, "PALMYRENE LETTER BETH", 0x31, "Palmyrene"),
    c(0x10862, None, "PALMYRENE LETTER GIMEL", 0x31, "Palmyrene"),
    c(0x10863, None, "PALMYRENE LETTER DALETH", 0x31, "Palmyrene"),
    c(0x10864, None, "PALMYRENE LETTER HE", 0x31, "Palmyrene"),
    c(0x10865, None, "PALMYRENE LETTER WAW", 0x31, "Palmyrene"),
    c(0x10866, None, "PALMYRENE LETTER ZAYIN", 0x31, "Palmyrene"),
    c(0x10867, None, "PALMYRENE LETTER HETH", 0x31, "Palmyrene"),
    c(0x10868, None, "PALMYRENE LETTER TETH", 0x31, "Palmyrene"),
    c(0x10869, None, "PALMYRENE LETTER YODH", 0x31, "Palmyrene"),
    c(0x1086A, None, "PALMYRENE LETTER KAPH", 0x31, "Palmyrene"),
    c(0x1086B, None, "PALMYRENE LETTER LAMEDH", 0x31, "Palmyrene"),
    c(0x1086C, None, "PALMYRENE LETTER MEM", 0x31, "Palmyrene"),
    c(0x1086D, None, "PALMYRENE LETTER FINAL NUN", 0x31, "Palmyrene"),
    c(0x1086E, None, "PALMYRENE LETTER NUN", 0x31, "Palmyrene"),
    c(0x1086F, None, "PALMYRENE LETTER SAMEKH", 0x31, "Palmyrene"),
    c(0x10870, None, "PALMYRENE LETTER AYIN", 0x31, "Palmyrene"),
    c(0x10871, None, "PALMYRENE LETTER PE", 0x31, "Palmyrene"),
    c(0x10872, None, "PALMYRENE LETTER SADHE", 0x31, "Palmyrene"),
    c(0x10873, None, "PALMYRENE LETTER QOPH", 0x31, "Palmyrene"),
    c(0x10874, None, "PALMYRENE LETTER RESH", 0x31, "Palmyrene"),
    c(0x10875, None, "PALMYRENE LETTER SHIN", 0x31, "Palmyrene"),
    c(0x10876, None, "PALMYRENE LETTER TAW", 0x31, "Palmyrene"),
    c(0x10877, None, "PALMYRENE LEFT-POINTING FLEURON", 0x00, "Palmyrene"),
    c(0x10878, None, "PALMYRENE RIGHT-POINTING FLEURON", 0x00, "Palmyrene"),
    c(0x10879, None, "PALMYRENE NUMBER ONE", 0x00, "Palmyrene"),
    c(0x1087A, None, "PALMYRENE NUMBER TWO", 0x00, "Palmyrene"),
    c(0x1087B, None, "PALMYRENE NUMBER THREE", 0x00, "Palmyrene"),
    c(0x1087C, None, "PALMYRENE NUMBER FOUR", 0x00, "Palmyrene"),
    c(0x1087D, None, "PALMYRENE NUMBER FIVE", 0x00, "Palmyrene"),
    c(0x1087E, None, "PALMYRENE NUMBER TEN", 0x00, "Palmyrene"),
    c(0x1087F, None, "PALMYRENE NUMBER TWENTY", 0x00, "Palmyrene"),
    c(0x10880, None, "NABATAEAN LETTER FINAL ALEPH", 0x31, "Nabataean"),
    c(0x10881, None, "NABATAEAN LETTER ALEPH", 0x31, "Nabataean"),
    c(0x10882, None, "NABATAEAN LETTER FINAL BETH", 0x31, "Nabataean"),
    c(0x10883, None, "NABATAEAN LETTER BETH", 0x31, "Nabataean"),
    c(0x10884, None, "NABATAEAN LETTER GIMEL", 0x31, "Nabataean"),
    c(0x10885, None, "NABATAEAN LETTER DALETH", 0x31, "Nabataean"),
    c(0x10886, None, "NABATAEAN LETTER FINAL HE", 0x31, "Nabataean"),
    c(0x10887, None, "NABATAEAN LETTER HE", 0x31, "Nabataean"),
    c(0x10888, None, "NABATAEAN LETTER WAW", 0x31, "Nabataean"),
    c(0x10889, None, "NABATAEAN LETTER ZAYIN", 0x31, "Nabataean"),
    c(0x1088A, None, "NABATAEAN LETTER HETH", 0x31, "Nabataean"),
    c(0x1088B, None, "NABATAEAN LETTER TETH", 0x31, "Nabataean"),
    c(0x1088C, None, "NABATAEAN LETTER FINAL YODH", 0x31, "Nabataean"),
    c(0x1088D, None, "NABATAEAN LETTER YODH", 0x31, "Nabataean"),
    c(0x1088E, None, "NABATAEAN LETTER FINAL KAPH", 0x31, "Nabataean"),
    c(0x1088F, None, "NABATAEAN LETTER KAPH", 0x31, "Nabataean"),
    c(0x10890, None, "NABATAEAN LETTER FINAL LAMEDH", 0x31, "Nabataean"),
    c(0x10891, None, "NABATAEAN LETTER LAMEDH", 0x31, "Nabataean"),
    c(0x10892, None, "NABATAEAN LETTER FINAL MEM", 0x31, "Nabataean"),
    c(0x10893, None, "NABATAEAN LETTER MEM", 0x31, "Nabataean"),
    c(0x10894, None, "NABATAEAN LETTER FINAL NUN", 0x31, "Nabataean"),
    c(0x10895, None, "NABATAEAN LETTER NUN", 0x31, "Nabataean"),
    c(0x10896, None, "NABATAEAN LETTER SAMEKH", 0x31, "Nabataean"),
    c(0x10897, None, "NABATAEAN LETTER AYIN", 0x31, "Nabataean"),
    c(0x10898, None, "NABATAEAN LETTER PE", 0x31, "Nabataean"),
    c(0x10899, None, "NABATAEAN LETTER SADHE", 0x31, "Nabataean"),
    c(0x1089A, None, "NABATAEAN LETTER QOPH", 0x31, "Nabataean"),
    c(0x1089B, None, "NABATAEAN LETTER RESH", 0x31, "Nabataean"),
    c(0x1089C, None, "NABATAEAN LETTER FINAL SHIN", 0x31, "Nabataean"),
    c(0x1089D, None, "NABATAEAN LETTER SHIN", 0x31, "Nabataean"),
    c(0x1089E, None, "NABATAEAN LETTER TAW", 0x31, "Nabataean"),
    c(0x108A7, None, "NABATAEAN NUMBER ONE", 0x00, "Nabataean"),
    c(0x108A8, None, "NABATAEAN NUMBER TWO", 0x00, "Nabataean"),
    c(0x108A9, None, "NABATAEAN NUMBER THREE", 0x00, "Nabataean"),
    c(0x108AA, None, "NABATAEAN NUMBER FOUR", 0x00, "Nabataean"),
    c(0x108AB, None, "NABATAEAN CRUCIFORM NUMBER FOUR", 0x00, "Nabataean"),
    c(0x108AC, None, "NABATAEAN NUMBER FIVE", 0x00, "Nabataean"),
    c(0x108AD, None, "NABATAEAN NUMBER TEN", 0x00, "Nabataean"),
    c(0x108AE, None, "NABATAEAN NUMBER TWENTY", 0x00, "Nabataean"),
    c(0x108AF, None, "NABATAEAN NUMBER ONE HUNDRED", 0x00, "Nabataean"),
    c(0x108E0, None, "HATRAN LETTER ALEPH", 0x31, "Hatran"),
    c(0x108E1, None, "HATRAN LETTER BETH", 0x31, "Hatran"),
    c(0x108E2, None, "HATRAN LETTER GIMEL", 0x31, "Hatran"),
    c(0x108E3, None, "HATRAN LETTER DALETH-RESH", 0x31, "Hatran"),
    c(0x108E4, None, "HATRAN LETTER HE", 0x31, "Hatran"),
    c(0x108E5, None, "HATRAN LETTER WAW", 0x31, "Hatran"),
    c(0x108E6, None, "HATRAN LETTER ZAYN", 0x31, "Hatran"),
    c(0x108E7, None, "HATRAN LETTER HETH", 0x31, "Hatran"),
    c(0x108E8, None, "HATRAN LETTER TETH", 0x31, "Hatran"),
    c(0x108E9, None, "HATRAN LETTER YODH", 0x31, "Hatran"),
    c(0x108EA, None, "HATRAN LETTER KAPH", 0x31, "Hatran"),
    c(0x108EB, None, "HATRAN LETTER LAMEDH", 0x31, "Hatran"),
    c(0x108EC, None, "HATRAN LETTER MEM", 0x31, "Hatran"),
    c(0x108ED, None, "HATRAN LETTER NUN", 0x31, "Hatran"),
    c(0x108EE, None, "HATRAN LETTER SAMEKH", 0x31, "Hatran"),
    c(0x108EF, None, "HATRAN LETTER AYN", 0x31, "Hatran"),
    c(0x108F0, None, "HATRAN LETTER PE", 0x31, "Hatran"),
    c(0x108F1, None, "HATRAN LETTER SADHE", 0x31, "Hatran"),
    c(0x108F2, None, "HATRAN LETTER QOPH", 0x31, "Hatran"),
    c(0x108F4, None, "HATRAN LETTER SHIN", 0x31, "Hatran"),
    c(0x108F5, None, "HATRAN LETTER TAW", 0x31, "Hatran"),
    c(0x108FB, None, "HATRAN NUMBER ONE", 0x00, "Hatran"),
    c(0x108FC, None, "HATRAN NUMBER FIVE", 0x00, "Hatran"),
    c(0x108FD, None, "HATRAN NUMBER TEN", 0x00, "Hatran"),
    c(0x108FE, None, "HATRAN NUMBER TWENTY", 0x00, "Hatran"),
    c(0x108FF, None, "HATRAN NUMBER ONE HUNDRED", 0x00, "Hatran"),
    c(0x10900, None, "PHOENICIAN LETTER ALF", 0x31, "Phoenician"),
    c(0x10901, None, "PHOENICIAN LETTER BET", 0x31, "Phoenician"),
    c(0x10902, None, "PHOENICIAN LETTER GAML", 0x31, "Phoenician"),
    c(0x10903, None, "PHOENICIAN LETTER DELT", 0x31, "Phoenician"),
    c(0x10904, None, "PHOENICIAN LETTER HE", 0x31, "Phoenician"),
    c(0x10905, None, "PHOENICIAN LETTER WAU", 0x31, "Phoenician"),
    c(0x10906, None, "PHOENICIAN LETTER ZAI", 0x31, "Phoenician"),
    c(0x10907, None, "PHOENICIAN LETTER HET", 0x31, "Phoenician"),
    c(0x10908, None, "PHOENICIAN LETTER TET", 0x31, "Phoenician"),
    c(0x10909, None, "PHOENICIAN LETTER YOD", 0x31, "Phoenician"),
    c(0x1090A, None, "PHOENICIAN LETTER KAF", 0x31, "Phoenician"),
    c(0x1090B, None, "PHOENICIAN LETTER LAMD", 0x31, "Phoenician"),
    c(0x1090C, None, "PHOENICIAN LETTER MEM", 0x31, "Phoenician"),
    c(0x1090D, None, "PHOENICIAN LETTER NUN", 0x31, "Phoenician"),
    c(0x1090E, None, "PHOENICIAN LETTER SEMK", 0x31, "Phoenician"),
    c(0x1090F, None, "PHOENICIAN LETTER AIN", 0x31, "Phoenician"),
    c(0x10910, None, "PHOENICIAN LETTER PE", 0x31, "Phoenician"),
    c(0x10911, None, "PHOENICIAN LETTER SADE", 0x31, "Phoenician"),
    c(0x10912, None, "PHOENICIAN LETTER QOF", 0x31, "Phoenician"),
    c(0x10913, None, "PHOENICIAN LETTER ROSH", 0x31, "Phoenician"),
    c(0x10914, None, "PHOENICIAN LETTER SHIN", 0x31, "Phoenician"),
    c(0x10915, None, "PHOENICIAN LETTER TAU", 0x31, "Phoenician"),
    c(0x10916, None, "PHOENICIAN NUMBER ONE", 0x00, "Phoenician"),
    c(0x10917, None, "PHOENICIAN NUMBER TEN", 0x00, "Phoenician"),
    c(0x10918, None, "PHOENICIAN NUMBER TWENTY", 0x00, "Phoenician"),
    c(0x10919, None, "PHOENICIAN NUMBER ONE HUNDRED", 0x00, "Phoenician"),
    c(0x1091A, None, "PHOENICIAN NUMBER TWO", 0x00, "Phoenician"),
    c(0x1091B, None, "PHOENICIAN NUMBER THREE", 0x00, "Phoenician"),
    c(0x1091F, None, "PHOENICIAN WORD SEPARATOR", 0x00, "Phoenician"),
    c(0x10920, None, "LYDIAN LETTER A", 0x31, "Lydian"),
    c(0x10921, None, "LYDIAN LETTER B", 0x31, "Lydian"),
    c(0x10922, None, "LYDIAN LETTER G", 0x31, "Lydian"),
    c(0x10923, None, "LYDIAN LETTER D", 0x31, "Lydian"),
    c(0x10924, None, "LYDIAN LETTER E", 0x31, "Lydian"),
    c(0x10925, None, "LYDIAN LETTER V", 0x31, "Lydian"),
    c(0x10926, None, "LYDIAN LETTER I", 0x31, "Lydian"),
    c(0x10927, None, "LYDIAN LETTER Y", 0x31, "Lydian"),
    c(0x10928, None, "LYDIAN LETTER K", 0x31, "Lydian"),
    c(0x10929, None, "LYDIAN LETTER L", 0x31, "Lydian"),
    c(0x1092A, None, "LYDIAN LETTER M", 0x31, "Lydian"),
    c(0x1092B, None, "LYDIAN LETTER N", 0x31, "Lydian"),
    c(0x1092C, None, "LYDIAN LETTER O", 0x31, "Lydian"),
    c(0x1092D, None, "LYDIAN LETTER R", 0x31, "Lydian"),
    c(0x1092E, None, "LYDIAN LETTER SS", 0x31, "Lydian"),
    c(0x1092F, None, "LYDIAN LETTER T", 0x31, "Lydian"),
    c(0x10930, None, "LYDIAN LETTER U", 0x31, "Lydian"),
    c(0x10931, None, "LYDIAN LETTER F", 0x31, "Lydian"),
    c(0x10932, None, "LYDIAN LETTER Q", 0x31, "Lydian"),
    c(0x10933, None, "LYDIAN LETTER S", 0x31, "Lydian"),
    c(0x10934, None, "LYDIAN LETTER TT", 0x31, "Lydian"),
    c(0x10935, None, "LYDIAN LETTER AN", 0x31, "Lydian"),
    c(0x10936, None, "LYDIAN LETTER EN", 0x31, "Lydian"),
    c(0x10937, None, "LYDIAN LETTER LY", 0x31, "Lydian"),
    c(0x10938, None, "LYDIAN LETTER NN", 0x31, "Lydian"),
    c(0x10939, None, "LYDIAN LETTER C", 0x31, "Lydian"),
    c(0x1093F, None, "LYDIAN TRIANGULAR MARK", 0x00, "Lydian"),
    c(0x10980, None, "MEROITIC HIEROGLYPHIC LETTER A", 0x31, "Meroitic_Hieroglyphs"),
    c(0x10981, None, "MEROITIC HIEROGLYPHIC LETTER E", 0x31, "Meroitic_Hieroglyphs"),
    c(0x10982, None, "MEROITIC HIEROGLYPHIC LETTER I", 0x31, "Meroitic_Hieroglyphs"),
    c(0x10983, None, "MEROITIC HIEROGLYPHIC LETTER O", 0x31, "Meroitic_Hieroglyphs"),
    c(0x10984, None, "MEROITIC HIEROGLYPHIC LETTER YA", 0x31, "Meroitic_Hieroglyphs"),
    c(0x10985, None, "MEROITIC HIEROGLYPHIC LETTER WA", 0x31, "Meroitic_Hieroglyphs"),
    c(0x10986, None, "MEROITIC HIEROGLYPHIC LETTER BA", 0x31, "Meroitic_Hieroglyphs"),
    c(0x10987, None, "MEROITIC HIEROGLYPHIC LETTER BA-2", 0x31, "Meroitic_Hieroglyphs"),
    c(0x10988, None, "MEROITIC HIEROGLYPHIC LETTER PA", 0x31, "Meroitic_Hieroglyphs"),
    c(0x10989, None, "MEROITIC HIEROGLYPHIC LETTER MA", 0x31, "Meroitic_Hieroglyphs"),
    c(0x1098A, None, "MEROITIC HIEROGLYPHIC LETTER NA", 0x31, "Meroitic_Hieroglyphs"),
    c(0x1098B, None, "MEROITIC HIEROGLYPHIC LETTER NA-2", 0x31, "Meroitic_Hieroglyphs"),
    c(0x1098C, None, "MEROITIC HIEROGLYPHIC LETTER NE", 0x31, "Meroitic_Hieroglyphs"),
    c(0x1098D, None, "MEROITIC HIEROGLYPHIC LETTER NE-2", 0x31, "Meroitic_Hieroglyphs"),
    c(0x1098E, None, "MEROITIC HIEROGLYPHIC LETTER RA", 0x31, "Meroitic_Hieroglyphs"),
    c(0x1098F, None, "MEROITIC HIEROGLYPHIC LETTER RA-2", 0x31, "Meroitic_Hieroglyphs"),
    c(0x10990, None, "MEROITIC HIEROGLYPHIC LETTER LA", 0x31, "Meroitic_Hieroglyphs"),
    c(0x10991, None, "MEROITIC HIEROGLYPHIC LETTER KHA", 0x31, "Meroitic_Hieroglyphs"),
    c(0x10992, None, "MEROITIC HIEROGLYPHIC LETTER HHA", 0x31, "Meroitic_Hieroglyphs"),
    c(0x10993, None, "MEROITIC HIEROGLYPHIC LETTER SA", 0x31, "Meroitic_Hieroglyphs"),
    c(0x10994, None, "MEROITIC HIEROGLYPHIC LETTER SA-2", 0x31, "Meroitic_Hieroglyphs"),
    c(0x10995, None, "MEROITIC HIEROGLYPHIC LETTER SE", 0x31, "Meroitic_Hieroglyphs"),
    c(0x10996, None, "MEROITIC HIEROGLYPHIC LETTER KA", 0x31, "Meroitic_Hieroglyphs"),
    c(0x10997, None, "MEROITIC HIEROGLYPHIC LETTER QA", 0x31, "Meroitic_Hieroglyphs"),
    c(0x10998, None, "MEROITIC HIEROGLYPHIC LETTER TA", 0x31, "Meroitic_Hieroglyphs"),
    c(0x10999, None, "MEROITIC HIEROGLYPHIC LETTER TA-2", 0x31, "Meroitic_Hieroglyphs"),
    c(0x1099A, None, "MEROITIC HIEROGLYPHIC LETTER TE", 0x31, "Meroitic_Hieroglyphs"),
    c(0x1099B, None, "MEROITIC HIEROGLYPHIC LETTER TE-2", 0x31, "Meroitic_Hieroglyphs"),
    c(0x1099C, None, "MEROITIC HIEROGLYPHIC LETTER TO", 0x31, "Meroitic_Hieroglyphs"),
    c(0x1099D, None, "MEROITIC HIEROGLYPHIC LETTER DA", 0x31, "Meroitic_Hieroglyphs"),
    c(0x1099E, None, "MEROITIC HIEROGLYPHIC SYMBOL VIDJ", 0x31, "Meroitic_Hieroglyphs"),
    c(0x1099F, None, "MEROITIC HIEROGLYPHIC SYMBOL VIDJ-2", 0x31, "Meroitic_Hieroglyphs"),
    c(0x109A0, None, "MEROITIC CURSIVE LETTER A", 0x31, "Meroitic_Cursive"),
    c(0x109A1, None, "MEROITIC CURSIVE LETTER E", 0x31, "Meroitic_Cursive"),
    c(0x109A2, None, "MEROITIC CURSIVE LETTER I", 0x31, "Meroitic_Cursive"),
    c(0x109A3, None, "MEROITIC CURSIVE LETTER O", 0x31, "Meroitic_Cursive"),
    c(0x109A4, None, "MEROITIC CURSIVE LETTER YA", 0x31, "Meroitic_Cursive"),
    c(0x109A5, None, "MEROITIC CURSIVE LETTER WA", 0x31, "Meroitic_Cursive"),
    c(0x109A6, None, "MEROITIC CURSIVE LETTER BA", 0x31, "Meroitic_Cursive"),
    c(0x109A7, None, "MEROITIC CURSIVE LETTER PA", 0x31, "Meroitic_Cursive"),
    c(0x109A8, None, "MEROITIC CURSIVE LETTER MA", 0x31, "Meroitic_Cursive"),
    c(0x109A9, None, "MEROITIC CURSIVE LETTER NA", 0x31, "Meroitic_Cursive"),
    c(0x109AA, None, "MEROITIC CURSIVE LETTER NE", 0x31, "Meroitic_Cursive"),
    c(0x109AB, None, "MEROITIC CURSIVE LETTER RA", 0x31, "Meroitic_Cursive"),
    c(0x109AC, None, "MEROITIC CURSIVE LETTER LA", 0x31, "Meroitic_Cursive"),
    c(0x109AD, None, "MEROITIC CURSIVE LETTER KHA", 0x31, "Meroitic_Cursive"),
    c(0x109AE, None, "MEROITIC CURSIVE LETTER HHA", 0x31, "Meroitic_Cursive"),
    c(0x109AF, None, "MEROITIC CURSIVE LETTER SA", 0x31, "Meroitic_Cursive"),
    c(0x109B0, None, "MEROITIC CURSIVE LETTER ARCHAIC SA", 0x31, "Meroitic_Cursive"),
    c(0x109B1, None, "MEROITIC CURSIVE LETTER SE", 0x31, "Meroitic_Cursive"),
    c(0x109B2, None, "MEROITIC CURSIVE LETTER KA", 0x31, "Meroitic_Cursive"),
    c(0x109B3, None, "MEROITIC CURSIVE LETTER QA", 0x31, "Meroitic_Cursive"),
    c(0x109B4, None, "MEROITIC CURSIVE LETTER TA", 0x31, "Meroitic_Cursive"),
    c(0x109B5, None, "MEROITIC CURSIVE LETTER TE", 0x31, "Meroitic_Cursive"),
    c(0x109B6, None, "MEROITIC CURSIVE LETTER TO", 0x31, "Meroitic_Cursive"),
    c(0x109B7, None, "MEROITIC CURSIVE LETTER DA", 0x31, "Meroitic_Cursive"),
    c(0x109BC, None, "MEROITIC CURSIVE FRACTION ELEVEN TWELFTHS", 0x00, "Meroitic_Cursive"),
    c(0x109BD, None, "MEROITIC CURSIVE FRACTION ONE HALF", 0x00, "Meroitic_Cursive"),
    c(0x109BE, None, "MEROITIC CURSIVE LOGOGRAM RMT", 0x31, "Meroitic_Cursive"),
    c(0x109BF, None, "MEROITIC CURSIVE LOGOGRAM IMN", 0x31, "Meroitic_Cursive"),
    c(0x109C0, None, "MEROITIC CURSIVE NUMBER ONE", 0x00, "Meroitic_Cursive"),
    c(0x109C1, None, "MEROITIC CURSIVE NUMBER TWO", 0x00, "Meroitic_Cursive"),
    c(0x109C2, None, "MEROITIC CURSIVE NUMBER THREE", 0x00, "Meroitic_Cursive"),
    c(0x109C3, None, "MEROITIC CURSIVE NUMBER FOUR", 0x00, "Meroitic_Cursive"),
    c(0x109C4, None, "MEROITIC CURSIVE NUMBER FIVE", 0x00, "Meroitic_Cursive"),
    c(0x109C5, None, "MEROITIC CURSIVE NUMBER SIX", 0x00, "Meroitic_Cursive"),
    c(0x109C6, None, "MEROITIC CURSIVE NUMBER SEVEN", 0x00, "Meroitic_Cursive"),
    c(0x109C7, None, "MEROITIC CURSIVE NUMBER EIGHT", 0x00, "Meroitic_Cursive"),
    c(0x109C8, None, "MEROITIC CURSIVE NUMBER NINE", 0x00, "Meroitic_Cursive"),
    c(0x109C9, None, "MEROITIC CURSIVE NUMBER TEN", 0x00, "Meroitic_Cursive"),
    c(0x109CA, None, "MEROITIC CURSIVE NUMBER TWENTY", 0x00, "Meroitic_Cursive"),
    c(0x109CB, None, "MEROITIC CURSIVE NUMBER THIRTY", 0x00, "Meroitic_Cursive"),
    c(0x109CC, None, "MEROITIC CURSIVE NUMBER FORTY", 0x00, "Meroitic_Cursive"),
    c(0x109CD, None, "MEROITIC CURSIVE NUMBER FIFTY", 0x00, "Meroitic_Cursive"),
    c(0x109CE, None, "MEROITIC CURSIVE NUMBER SIXTY", 0x00, "Meroitic_Cursive"),
    c(0x109CF, None, "MEROITIC CURSIVE NUMBER SEVENTY", 0x00, "Meroitic_Cursive"),
    c(0x109D2, None, "MEROITIC CURSIVE NUMBER ONE HUNDRED", 0x00, "Meroitic_Cursive"),
    c(0x109D3, None, "MEROITIC CURSIVE NUMBER TWO HUNDRED", 0x00, "Meroitic_Cursive"),
    c(0x109D4, None, "MEROITIC CURSIVE NUMBER THREE HUNDRED", 0x00, "Meroitic_Cursive"),
    c(0x109D5, None, "MEROITIC CURSIVE NUMBER FOUR HUNDRED", 0x00, "Meroitic_Cursive"),
    c(0x109D6, None, "MEROITIC CURSIVE NUMBER FIVE HUNDRED", 0x00, "Meroitic_Cursive"),
    c(0x109D7, None, "MEROITIC CURSIVE NUMBER SIX HUNDRED", 0x00, "Meroitic_Cursive"),
    c(0x109D8, None, "MEROITIC CURSIVE NUMBER SEVEN HUNDRED", 0x00, "Meroitic_Cursive"),
    c(0x109D9, None, "MEROITIC CURSIVE NUMBER EIGHT HUNDRED", 0x00, "Meroitic_Cursive"),
    c(0x109DA, None, "MEROITIC CURSIVE NUMBER NINE HUNDRED", 0x00, "Meroitic_Cursive"),
    c(0x109DB, None, "MEROITIC CURSIVE NUMBER ONE THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109DC, None, "MEROITIC CURSIVE NUMBER TWO THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109DD, None, "MEROITIC CURSIVE NUMBER THREE THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109DE, None, "MEROITIC CURSIVE NUMBER FOUR THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109DF, None, "MEROITIC CURSIVE NUMBER FIVE THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109E0, None, "MEROITIC CURSIVE NUMBER SIX THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109E1, None, "MEROITIC CURSIVE NUMBER SEVEN THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109E2, None, "MEROITIC CURSIVE NUMBER EIGHT THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109E3, None, "MEROITIC CURSIVE NUMBER NINE THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109E4, None, "MEROITIC CURSIVE NUMBER TEN THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109E5, None, "MEROITIC CURSIVE NUMBER TWENTY THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109E6, None, "MEROITIC CURSIVE NUMBER THIRTY THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109E7, None, "MEROITIC CURSIVE NUMBER FORTY THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109E8, None, "MEROITIC CURSIVE NUMBER FIFTY THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109E9, None, "MEROITIC CURSIVE NUMBER SIXTY THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109EA, None, "MEROITIC CURSIVE NUMBER SEVENTY THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109EB, None, "MEROITIC CURSIVE NUMBER EIGHTY THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109EC, None, "MEROITIC CURSIVE NUMBER NINETY THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109ED, None, "MEROITIC CURSIVE NUMBER ONE HUNDRED THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109EE, None, "MEROITIC CURSIVE NUMBER TWO HUNDRED THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109EF, None, "MEROITIC CURSIVE NUMBER THREE HUNDRED THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109F0, None, "MEROITIC CURSIVE NUMBER FOUR HUNDRED THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109F1, None, "MEROITIC CURSIVE NUMBER FIVE HUNDRED THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109F2, None, "MEROITIC CURSIVE NUMBER SIX HUNDRED THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109F3, None, "MEROITIC CURSIVE NUMBER SEVEN HUNDRED THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109F4, None, "MEROITIC CURSIVE NUMBER EIGHT HUNDRED THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109F5, None, "MEROITIC CURSIVE NUMBER NINE HUNDRED THOUSAND", 0x00, "Meroitic_Cursive"),
    c(0x109F6, None, "MEROITIC CURSIVE FRACTION ONE TWELFTH", 0x00, "Meroitic_Cursive"),
    c(0x109F7, None, "MEROITIC CURSIVE FRACTION TWO TWELFTHS", 0x00, "Meroitic_Cursive"),
    c(0x109F8, None, "MEROITIC CURSIVE FRACTION THREE TWELFTHS", 0x00, "Meroitic_Cursive"),
    c(0x109F9, None, "MEROITIC CURSIVE FRACTION FOUR TWELFTHS", 0x00, "Meroitic_Cursive"),
    c(0x109FA, None, "MEROITIC CURSIVE FRACTION FIVE TWELFTHS", 0x00, "Meroitic_Cursive"),
    c(0x109FB, None, "MEROITIC CURSIVE FRACTION SIX TWELFTHS", 0x00, "Meroitic_Cursive"),
    c(0x109FC, None, "MEROITIC CURSIVE FRACTION SEVEN TWELFTHS", 0x00, "Meroitic_Cursive"),
    c(0x109FD, None, "MEROITIC CURSIVE FRACTION EIGHT TWELFTHS", 0x00, "Meroitic_Cursive"),
    c(0x109FE, None, "MEROITIC CURSIVE FRACTION NINE TWELFTHS", 0x00, "Meroitic_Cursive"),
    c(0x109FF, None, "MEROITIC CURSIVE FRACTION TEN TWELFTHS", 0x00, "Meroitic_Cursive"),
    c(0x10A00, None, "KHAROSHTHI LETTER A", 0x31, "Kharoshthi"),
    c(0x10A01, None, "KHAROSHTHI VOWEL SIGN I", 0x21, "Kharoshthi"),
    c(0x10A02, None, "KHAROSHTHI VOWEL SIGN U", 0x21, "Kharoshthi"),
    c(0x10A03, None, "KHAROSHTHI VOWEL SIGN VOCALIC R", 0x21, "Kharoshthi"),
    c(0x10A05, None, "KHAROSHTHI VOWEL SIGN E", 0x21, "Kharoshthi"),
    c(0x10A06, None, "KHAROSHTHI VOWEL SIGN O", 0x21, "Kharoshthi"),
    c(0x10A0C, None, "KHAROSHTHI VOWEL LENGTH MARK", 0x21, "Kharoshthi"),
    c(0x10A0D, None, "KHAROSHTHI SIGN DOUBLE RING BELOW", 0x21, "Kharoshthi"),
    c(0x10A0E, None, "KHAROSHTHI SIGN ANUSVARA", 0x21, "Kharoshthi"),
    c(0x10A0F, None, "KHAROSHTHI SIGN VISARGA", 0x21, "Kharoshthi"),
    c(0x10A10, None, "KHAROSHTHI LETTER KA", 0x31, "Kharoshthi"),
    c(0x10A11, None, "KHAROSHTHI LETTER KHA", 0x31, "Kharoshthi"),
    c(0x10A12, None, "KHAROSHTHI LETTER GA", 0x31, "Kharoshthi"),
    c(0x10A13, None, "KHAROSHTHI LETTER GHA", 0x31, "Kharoshthi"),
    c(0x10A15, None, "KHAROSHTHI LETTER CA", 0x31, "Kharoshthi"),
    c(0x10A16, None, "KHAROSHTHI LETTER CHA", 0x31, "Kharoshthi"),
    c(0x10A17, None, "KHAROSHTHI LETTER JA", 0x31, "Kharoshthi"),
    c(0x10A19, None, "KHAROSHTHI LETTER NYA", 0x31, "Kharoshthi"),
    c(0x10A1A, None, "KHAROSHTHI LETTER TTA", 0x31, "Kharoshthi"),
    c(0x10A1B, None, "KHAROSHTHI LETTER TTHA", 0x31, "Kharoshthi"),
    c(0x10A1C, None, "KHAROSHTHI LETTER DDA", 0x31, "Kharoshthi"),
    c(0x10A1D, None, "KHAROSHTHI LETTER DDHA", 0x31, "Kharoshthi"),
    c(0x10A1E, None, "KHAROSHTHI LETTER NNA", 0x31, "Kharoshthi"),
    c(0x10A1F, None, "KHAROSHTHI LETTER TA", 0x31, "Kharoshthi"),
    c(0x10A20, None, "KHAROSHTHI LETTER THA", 0x31, "Kharoshthi"),
    c(0x10A21, None, "KHAROSHTHI LETTER DA", 0x31, "Kharoshthi"),
    c(0x10A22, None, "KHAROSHTHI LETTER DHA", 0x31, "Kharoshthi"),
    c(0x10A23, None, "KHAROSHTHI LETTER NA", 0x31, "Kharoshthi"),
    c(0x10A24, None, "KHAROSHTHI LETTER PA", 0x31, "Kharoshthi"),
    c(0x10A25, None, "KHAROSHTHI LETTER PHA", 0x31, "Kharoshthi"),
    c(0x10A26, None, "KHAROSHTHI LETTER BA", 0x31, "Kharoshthi"),
    c(0x10A27, None, "KHAROSHTHI LETTER BHA", 0x31, "Kharoshthi"),
    c(0x10A28, None, "KHAROSHTHI LETTER MA", 0x31, "Kharoshthi"),
    c(0x10A29, None, "KHAROSHTHI LETTER YA", 0x31, "Kharoshthi"),
    c(0x10A2A, None, "KHAROSHTHI LETTER RA", 0x31, "Kharoshthi"),
    c(0x10A2B, None, "KHAROSHTHI LETTER LA", 0x31, "Kharoshthi"),
    c(0x10A2C, None, "KHAROSHTHI LETTER VA", 0x31, "Kharoshthi"),
    c(0x10A2D, None, "KHAROSHTHI LETTER SHA", 0x31, "Kharoshthi"),
    c(0x10A2E, None, "KHAROSHTHI LETTER SSA", 0x31, "Kharoshthi"),
    c(0x10A2F, None, "KHAROSHTHI LETTER SA", 0x31, "Kharoshthi"),
    c(0x10A30, None, "KHAROSHTHI LETTER ZA", 0x31, "Kharoshthi"),
    c(0x10A31, None, "KHAROSHTHI LETTER HA", 0x31, "Kharoshthi"),
    c(0x10A32, None, "KHAROSHTHI LETTER KKA", 0x31, "Kharoshthi"),
    c(0x10A33, None, "KHAROSHTHI LETTER TTTHA", 0x31, "Kharoshthi"),
    c(0x10A34, None, "KHAROSHTHI LETTER TTTA", 0x31, "Kharoshthi"),
    c(0x10A35, None, "KHAROSHTHI LETTER VHA", 0x31, "Kharoshthi"),
    c(0x10A38, None, "KHAROSHTHI SIGN BAR ABOVE", 0x20, "Kharoshthi"),
    c(0x10A39, None, "KHAROSHTHI SIGN CAUDA", 0x20, "Kharoshthi"),
    c(0x10A3A, None, "KHAROSHTHI SIGN DOT BELOW", 0x20, "Kharoshthi"),
    c(0x10A3F, None, "KHAROSHTHI VIRAMA", 0x20, "Kharoshthi"),
    c(0x10A40, None, "KHAROSHTHI DIGIT ONE", 0x00, "Kharoshthi"),
    c(0x10A41, None, "KHAROSHTHI DIGIT TWO", 0x00, "Kharoshthi"),
    c(0x10A42, None, "KHAROSHTHI DIGIT THREE", 0x00, "Kharoshthi"),
    c(0x10A43, None, "KHAROSHTHI DIGIT FOUR", 0x00, "Kharoshthi"),
    c(0x10A44, None, "KHAROSHTHI NUMBER TEN", 0x00, "Kharoshthi"),
    c(0x10A45, None, "KHAROSHTHI NUMBER TWENTY", 0x00, "Kharoshthi"),
    c(0x10A46, None, "KHAROSHTHI NUMBER ONE HUNDRED", 0x00, "Kharoshthi"),
    c(0x10A47, None, "KHAROSHTHI NUMBER ONE THOUSAND", 0x00, "Kharoshthi"),
    c(0x10A48, None, "KHAROSHTHI FRACTION ONE HALF", 0x00, "Kharoshthi"),
    c(0x10A50, None, "KHAROSHTHI PUNCTUATION DOT", 0x00, "Kharoshthi"),
    c(0x10A51, None, "KHAROSHTHI PUNCTUATION SMALL CIRCLE", 0x00, "Kharoshthi"),
    c(0x10A52, None, "KHAROSHTHI PUNCTUATION CIRCLE", 0x00, "Kharoshthi"),
    c(0x10A53, None, "KHAROSHTHI PUNCTUATION CRESCENT BAR", 0x00, "Kharoshthi"),
    c(0x10A54, None, "KHAROSHTHI PUNCTUATION MANGALAM", 0x00, "Kharoshthi"),
    c(0x10A55, None, "KHAROSHTHI PUNCTUATION LOTUS", 0x00, "Kharoshthi"),
    c(0x10A56, None, "KHAROSHTHI PUNCTUATION DANDA", 0x00, "Kharoshthi"),
    c(0x10A57, None, "KHAROSHTHI PUNCTUATION DOUBLE DANDA", 0x00, "Kharoshthi"),
    c(0x10A58, None, "KHAROSHTHI PUNCTUATION LINES", 0x00, "Kharoshthi"),
    c(0x10A60, None, "OLD SOUTH ARABIAN LETTER HE", 0x31, "Old_South_Arabian"),
    c(0x10A61, None, "OLD SOUTH ARABIAN LETTER LAMEDH", 0x31, "Old_South_Arabian"),
    c(0x10A62, None, "OLD SOUTH ARABIAN LETTER HETH", 0x31, "Old_South_Arabian"),
    c(0x10A63, None, "OLD SOUTH ARABIAN LETTER MEM", 0x31, "Old_South_Arabian"),
    c(0x10A64, None, "OLD SOUTH ARABIAN LETTER QOPH", 0x31, "Old_South_Arabian"),
    c(0x10A65, None, "OLD SOUTH ARABIAN LETTER WAW", 0x31, "Old_South_Arabian"),
    c(0x10A66, None, "OLD SOUTH ARABIAN LETTER SHIN", 0x31, "Old_South_Arabian"),
    c(0x10A67, None, "OLD SOUTH ARABIAN LETTER RESH", 0x31, "Old_South_Arabian"),
    c(0x10A68, None, "OLD SOUTH ARABIAN LETTER BETH", 0x31, "Old_South_Arabian"),
    c(0x10A69, None, "OLD SOUTH ARABIAN LETTER TAW", 0x31, "Old_South_Arabian"),
    c(0x10A6A, None, "OLD SOUTH ARABIAN LETTER SAT", 0x31, "Old_South_Arabian"),
    c(0x10A6B, None, "OLD SOUTH ARABIAN LETTER KAPH", 0x31, "Old_South_Arabian"),
    c(0x10A6C, None, "OLD SOUTH ARABIAN LETTER NUN", 0x31, "Old_South_Arabian"),
    c(0x10A6D, None, "OLD SOUTH ARABIAN LETTER KHETH", 0x31, "Old_South_Arabian"),
    c(0x10A6E, None, "OLD SOUTH ARABIAN LETTER SADHE", 0x31, "Old_South_Arabian"),
    c(0x10A6F, None, "OLD SOUTH ARABIAN LETTER SAMEKH", 0x31, "Old_South_Arabian"),
    c(0x10A70, None, "OLD SOUTH ARABIAN LETTER FE", 0x31, "Old_South_Arabian"),
    c(0x10A71, None, "OLD SOUTH ARABIAN LETTER ALEF", 0x31, "Old_South_Arabian"),
    c(0x10A72, None, "OLD SOUTH ARABIAN LETTER AYN", 0x31, "Old_South_Arabian"),
    c(0x10A73, None, "OLD SOUTH ARABIAN LETTER DHADHE", 0x31, "Old_South_Arabian"),
    c(0x10A74, None, "OLD SOUTH ARABIAN LETTER GIMEL", 0x31, "Old_South_Arabian"),
    c(0x10A75, None, "OLD SOUTH ARABIAN LETTER DALETH", 0x31, "Old_South_Arabian"),
    c(0x10A76, None, "OLD SOUTH ARABIAN LETTER GHAYN", 0x31, "Old_South_Arabian"),
    c(0x10A77, None, "OLD SOUTH ARABIAN LETTER TETH", 0x31, "Old_South_Arabian"),
    c(0x10A78, None, "OLD SOUTH ARABIAN LETTER ZAYN", 0x31, "Old_South_Arabian"),
    c(0x10A79, None, "OLD SOUTH ARABIAN LETTER DHALETH", 0x31, "Old_South_Arabian"),
    c(0x10A7A, None, "OLD SOUTH ARABIAN LETTER YODH", 0x31, "Old_South_Arabian"),
    c(0x10A7B, None, "OLD SOUTH ARABIAN LETTER THAW", 0x31, "Old_South_Arabian"),
    c(0x10A7C, None, "OLD SOUTH ARABIAN LETTER THETH", 0x31, "Old_South_Arabian"),
    c(0x10A7D, None, "OLD SOUTH ARABIAN NUMBER ONE", 0x00, "Old_South_Arabian"),
    c(0x10A7E, None, "OLD SOUTH ARABIAN NUMBER FIFTY", 0x00, "Old_South_Arabian"),
    c(0x10A7F, None, "OLD SOUTH ARABIAN NUMERIC INDICATOR", 0x00, "Old_South_Arabian"),
    c(0x10A80, None, "OLD NORTH ARABIAN LETTER HEH", 0x31, "Old_North_Arabian"),
    c(0x10A81, None, "OLD NORTH ARABIAN LETTER LAM", 0x31, "Old_North_Arabian"),
    c(0x10A82, None, "OLD NORTH ARABIAN LETTER HAH", 0x31, "Old_North_Arabian"),
    c(0x10A83, None, "OLD NORTH ARABIAN LETTER MEEM", 0x31, "Old_North_Arabian"),
    c(0x10A84, None, "OLD NORTH ARABIAN LETTER QAF", 0x31, "Old_North_Arabian"),
    c(0x10A85, None, "OLD NORTH ARABIAN LETTER WAW", 0x31, "Old_North_Arabian"),
    c(0x10A86, None, "OLD NORTH ARABIAN LETTER ES-2", 0x31, "Old_North_Arabian"),
    c(0x10A87, None, "OLD NORTH ARABIAN LETTER REH", 0x31, "Old_North_Arabian"),
    c(0x10A88, None, "OLD NORTH ARABIAN LETTER BEH", 0x31, "Old_North_Arabian"),
    c(0x10A89, None, "OLD NORTH ARABIAN LETTER TEH", 0x31, "Old_North_Arabian"),
    c(0x10A8A, None, "OLD NORTH ARABIAN LETTER ES-1", 0x31, "Old_North_Arabian"),
    c(0x10A8B, None, "OLD NORTH ARABIAN LETTER KAF", 0x31, "Old_North_Arabian"),
    c(0x10A8C, None, "OLD NORTH ARABIAN LETTER NOON", 0x31, "Old_North_Arabian"),
    c(0x10A8D, None, "OLD NORTH ARABIAN LETTER KHAH", 0x31, "Old_North_Arabian"),
    c(0x10A8E, None, "OLD NORTH ARABIAN LETTER SAD", 0x31, "Old_North_Arabian"),
    c(0x10A8F, None, "OLD NORTH ARABIAN LETTER ES-3", 0x31, "Old_North_Arabian"),
    c(0x10A90, None, "OLD NORTH ARABIAN LETTER FEH", 0x31, "Old_North_Arabian"),
    c(0x10A91, None, "OLD NORTH ARABIAN LETTER ALEF", 0x31, "Old_North_Arabian"),
    c(0x10A92, None, "OLD NORTH ARABIAN LETTER AIN", 0x31, "Old_North_Arabian"),
    c(0x10A93, None, "OLD NORTH ARABIAN LETTER DAD", 0x31, "Old_North_Arabian"),
    c(0x10A94, None, "OLD NORTH ARABIAN LETTER GEEM", 0x31, "Old_North_Arabian"),
    c(0x10A95, None, "OLD NORTH ARABIAN LETTER DAL", 0x31, "Old_North_Arabian"),
    c(0x10A96, None, "OLD NORTH ARABIAN LETTER GHAIN", 0x31, "Old_North_Arabian"),
    c(0x10A97, None, "OLD NORTH ARABIAN LETTER TAH", 0x31, "Old_North_Arabian"),
    c(0x10A98, None, "OLD NORTH ARABIAN LETTER ZAIN", 0x31, "Old_North_Arabian"),
    c(0x10A99, None, "OLD NORTH ARABIAN LETTER THAL", 0x31, "Old_North_Arabian"),
    c(0x10A9A, None, "OLD NORTH ARABIAN LETTER YEH", 0x31, "Old_North_Arabian"),
    c(0x10A9B, None, "OLD NORTH ARABIAN LETTER THEH", 0x31, "Old_North_Arabian"),
    c(0x10A9C, None, "OLD NORTH ARABIAN LETTER ZAH", 0x31, "Old_North_Arabian"),
    c(0x10A9D, None, "OLD NORTH ARABIAN NUMBER ONE", 0x00, "Old_North_Arabian"),
    c(0x10A9E, None, "OLD NORTH ARABIAN NUMBER TEN", 0x00, "Old_North_Arabian"),
    c(0x10A9F, None, "OLD NORTH ARABIAN NUMBER TWENTY", 0x00, "Old_North_Arabian"),
    c(0x10AC0, None, "MANICHAEAN LETTER ALEPH", 0x31, "Manichaean"),
    c(0x10AC1, None, "MANICHAEAN LETTER BETH", 0x31, "Manichaean"),
    c(0x10AC2, None, "MANICHAEAN LETTER BHETH", 0x31, "Manichaean"),
    c(0x10AC3, None, "MANICHAEAN LETTER GIMEL", 0x31, "Manichaean"),
    c(0x10AC4, None, "MANICHAEAN LETTER GHIMEL", 0x31, "Manichaean"),
    c(0x10AC5, None, "MANICHAEAN LETTER DALETH", 0x31, "Manichaean"),
    c(0x10AC6, None, "MANICHAEAN LETTER HE", 0x31, "Manichaean"),
    c(0x10AC7, None, "MANICHAEAN LETTER WAW", 0x31, "Manichaean"),
    c(0x10AC8, None, "MANICHAEAN SIGN UD", 0x00, "Manichaean"),
    c(0x10AC9, None, "MANICHAEAN LETTER ZAYIN", 0x31, "Manichaean"),
    c(0x10ACA, None, "MANICHAEAN LETTER ZHAYIN", 0x31, "Manichaean"),
    c(0x10ACB, None, "MANICHAEAN LETTER JAYIN", 0x31, "Manichaean"),
    c(0x10ACC, None, "MANICHAEAN LETTER JHAYIN", 0x31, "Manichaean"),
    c(0x10ACD, None, "MANICHAEAN LETTER HETH", 0x31, "Manichaean"),
    c(0x10ACE, None, "MANICHAEAN LETTER TETH", 0x31, "Manichaean"),
    c(0x10ACF, None, "MANICHAEAN LETTER YODH", 0x31, "Manichaean"),
    c(0x10AD0, None, "MANICHAEAN LETTER KAPH", 0x31, "Manichaean"),
    c(0x10AD1, None, "MANICHAEAN LETTER XAPH", 0x31, "Manichaean"),
    c(0x10AD2, None, "MANICHAEAN LETTER KHAPH", 0x31, "Manichaean"),
    c(0x10AD3, None, "MANICHAEAN LETTER LAMEDH", 0x31, "Manichaean"),
    c(0x10AD4, None, "MANICHAEAN LETTER DHAMEDH", 0x31, "Manichaean"),
    c(0x10AD5, None, "MANICHAEAN LETTER THAMEDH", 0x31, "Manichaean"),
    c(0x10AD6, None, "MANICHAEAN LETTER MEM", 0x31, "Manichaean"),
    c(0x10AD7, None, "MANICHAEAN LETTER NUN", 0x31, "Manichaean"),
    c(0x10AD8, None, "MANICHAEAN LETTER SAMEKH", 0x31, "Manichaean"),
    c(0x10AD9, None, "MANICHAEAN LETTER AYIN", 0x31, "Manichaean"),
    c(0x10ADA, None, "MANICHAEAN LETTER AAYIN", 0x31, "Manichaean"),
    c(0x10ADB, None, "MANICHAEAN LETTER PE", 0x31, "Manichaean"),
    c(0x10ADC, None, "MANICHAEAN LETTER FE", 0x31, "Manichaean"),
    c(0x10ADD, None, "MANICHAEAN LETTER SADHE", 0x31, "Manichaean"),
    c(0x10ADE, None, "MANICHAEAN LETTER QOPH", 0x31, "Manichaean"),
    c(0x10ADF, None, "MANICHAEAN LETTER XOPH", 0x31, "Manichaean"),
    c(0x10AE0, None, "MANICHAEAN LETTER QHOPH", 0x31, "Manichaean"),
    c(0x10AE1, None, "MANICHAEAN LETTER RESH", 0x31, "Manichaean"),
    c(0x10AE2, None, "MANICHAEAN LETTER SHIN", 0x31, "Manichaean"),
    c(0x10AE3, None, "MANICHAEAN LETTER SSHIN", 0x31, "Manichaean"),
    c(0x10AE4, None, "MANICHAEAN LETTER TAW", 0x31, "Manichaean"),
    c(0x10AE5, None, "MANICHAEAN ABBREVIATION MARK ABOVE", 0x20, "Manichaean"),
    c(0x10AE6, None, "MANICHAEAN ABBREVIATION MARK BELOW", 0x20, "Manichaean"),
    c(0x10AEB, None, "MANICHAEAN NUMBER ONE", 0x00, "Manichaean"),
    c(0x10AEC, None, "MANICHAEAN NUMBER FIVE", 0x00, "Manichaean"),
    c(0x10AED, None, "MANICHAEAN NUMBER TEN", 0x00, "Manichaean"),
    c(0x10AEE, None, "MANICHAEAN NUMBER TWENTY", 0x00, "Manichaean"),
    c(0x10AEF, None, "MANICHAEAN NUMBER ONE HUNDRED", 0x00, "Manichaean"),
    c(0x10AF0, None, "MANICHAEAN PUNCTUATION STAR", 0x00, "Manichaean"),
    c(0x10AF1, None, "MANICHAEAN PUNCTUATION FLEURON", 0x00, "Manichaean"),
    c(0x10AF2, None, "MANICHAEAN PUNCTUATION DOUBLE DOT WITHIN DOT", 0x00, "Manichaean"),
    c(0x10AF3, None, "MANICHAEAN PUNCTUATION DOT WITHIN DOT", 0x00, "Manichaean"),
    c(0x10AF4, None, "MANICHAEAN PUNCTUATION DOT", 0x00, "Manichaean"),
    c(0x10AF5, None, "MANICHAEAN PUNCTUATION TWO DOTS", 0x00, "Manichaean"),
    c(0x10AF6, None, "MANICHAEAN PUNCTUATION LINE FILLER", 0x00, "Manichaean"),
    c(0x10B00, None, "AVESTAN LETTER A", 0x31, "Avestan"),
    c(0x10B01, None, "AVESTAN LETTER AA", 0x31, "Avestan"),
    c(0x10B02, None, "AVESTAN LETTER AO", 0x31, "Avestan"),
    c(0x10B03, None, "AVESTAN LETTER AAO", 0x31, "Avestan"),
    c(0x10B04, None, "AVESTAN LETTER AN", 0x31, "Avestan"),
    c(0x10B05, None, "AVESTAN LETTER AAN", 0x31, "Avestan"),
    c(0x10B06, None, "AVESTAN LETTER AE", 0x31, "Avestan"),
    c(0x10B07, None, "AVESTAN LETTER AEE", 0x31, "Avestan"),
    c(0x10B08, None, "AVESTAN LETTER E", 0x31, "Avestan"),
    c(0x10B09, None, "AVESTAN LETTER EE", 0x31, "Avestan"),
    c(0x10B0A, None, "AVESTAN LETTER O", 0x31, "Avestan"),
    c(0x10B0B, None, "AVESTAN LETTER OO", 0x31, "Avestan"),
    c(0x10B0C, None, "AVESTAN LETTER I", 0x31, "Avestan"),
    c(0x10B0D, None, "AVESTAN LETTER II", 0x31, "Avestan"),
    c(0x10B0E, None, "AVESTAN LETTER U", 0x31, "Avestan"),
    c(0x10B0F, None, "AVESTAN LETTER UU", 0x31, "Avestan"),
    c(0x10B10, None, "AVESTAN LETTER KE", 0x31, "Avestan"),
    c(0x10B11, None, "AVESTAN LETTER XE", 0x31, "Avestan"),
    c(0x10B12, None, "AVESTAN LETTER XYE", 0x31, "Avestan"),
    c(0x10B13, None, "AVESTAN LETTER XVE", 0x31, "Avestan"),
    c(0x10B14, None, "AVESTAN LETTER GE", 0x31, "Avestan"),
    c(0x10B15, None, "AVESTAN LETTER GGE", 0x31, "Avestan"),
    c(0x10B16, None, "AVESTAN LETTER GHE", 0x31, "Avestan"),
    c(0x10B17, None, "AVESTAN LETTER CE", 0x31, "Avestan"),
    c(0x10B18, None, "AVESTAN LETTER JE", 0x31, "Avestan"),
    c(0x10B19, None, "AVESTAN LETTER TE", 0x31, "Avestan"),
    c(0x10B1A, None, "AVESTAN LETTER THE", 0x31, "Avestan"),
    c(0x10B1B, None, "AVESTAN LETTER DE", 0x31, "Avestan"),
    c(0x10B1C, None, "AVESTAN LETTER DHE", 0x31, "Avestan"),
    c(0x10B1D, None, "AVESTAN LETTER TTE", 0x31, "Avestan"),
    c(0x10B1E, None, "AVESTAN LETTER PE", 0x31, "Avestan"),
    c(0x10B1F, None, "AVESTAN LETTER FE", 0x31, "Avestan"),
    c(0x10B20, None, "AVESTAN LETTER BE", 0x31, "Avestan"),
    c(0x10B21, None, "AVESTAN LETTER BHE", 0x31, "Avestan"),
    c(0x10B22, None, "AVESTAN LETTER NGE", 0x31, "Avestan"),
    c(0x10B23, None, "AVESTAN LETTER NGYE", 0x31, "Avestan"),
    c(0x10B24, None, "AVESTAN LETTER NGVE", 0x31, "Avestan"),
    c(0x10B25, None, "AVESTAN LETTER NE", 0x31, "Avestan"),
    c(0x10B26, None, "AVESTAN LETTER NYE", 0x31, "Avestan"),
    c(0x10B27, None, "AVESTAN LETTER NNE", 0x31, "Avestan"),
    c(0x10B28, None, "AVESTAN LETTER ME", 0x31, "Avestan"),
    c(0x10B29, None, "AVESTAN LETTER HME", 0x31, "Avestan"),
    c(0x10B2A, None, "AVESTAN LETTER YYE", 0x31, "Avestan"),
    c(0x10B2B, None, "AVESTAN LETTER YE", 0x31, "Avestan"),
    c(0x10B2C, None, "AVESTAN LETTER VE", 0x31, "Avestan"),
    c(0x10B2D, None, "AVESTAN LETTER RE", 0x31, "Avestan"),
    c(0x10B2E, None, "AVESTAN LETTER LE", 0x31, "Avestan"),
    c(0x10B2F, None, "AVESTAN LETTER SE", 0x31, "Avestan"),
    c(0x10B30, None, "AVESTAN LETTER ZE", 0x31, "Avestan"),
    c(0x10B31, None, "AVESTAN LETTER SHE", 0x31, "Avestan"),
    c(0x10B32, None, "AVESTAN LETTER ZHE", 0x31, "Avestan"),
    c(0x10B33, None, "AVESTAN LETTER SHYE", 0x31, "Avestan"),
    c(0x10B34, None, "AVESTAN LETTER SSHE", 0x31, "Avestan"),
    c(0x10B35, None, "AVESTAN LETTER HE", 0x31, "Avestan"),
    c(0x10B39, None, "AVESTAN ABBREVIATION MARK", 0x00, "Avestan"),
    c(0x10B3A, None, "TINY TWO DOTS OVER ONE DOT PUNCTUATION", 0x00, "Avestan"),
    c(0x10B3B, None, "SMALL TWO DOTS OVER ONE DOT PUNCTUATION", 0x00, "Avestan"),
    c(0x10B3C, None, "LARGE TWO DOTS OVER ONE DOT PUNCTUATION", 0x00, "Avestan"),
    c(0x10B3D, None, "LARGE ONE DOT OVER TWO DOTS PUNCTUATION", 0x00, "Avestan"),
    c(0x10B3E, None, "LARGE TWO RINGS OVER ONE RING PUNCTUATION", 0x00, "Avestan"),
    c(0x10B3F, None, "LARGE ONE RING OVER TWO RINGS PUNCTUATION", 0x00, "Avestan"),
    c(0x10B40, None, "INSCRIPTIONAL PARTHIAN LETTER ALEPH", 0x31, "Inscriptional_Parthian"),
    c(0x10B41, None, "INSCRIPTIONAL PARTHIAN LETTER BETH", 0x31, "Inscriptional_Parthian"),
    c(0x10B42, None, "INSCRIPTIONAL PARTHIAN LETTER GIMEL", 0x31, "Inscriptional_Parthian"),
    c(0x10B43, None, "INSCRIPTIONAL PARTHIAN LETTER DALETH", 0x31, "Inscriptional_Parthian"),
    c(0x10B44, None, "INSCRIPTIONAL PARTHIAN LETTER HE", 0x31, "Inscriptional_Parthian"),
    c(0x10B45, None, "INSCRIPTIONAL PARTHIAN LETTER WAW", 0x31, "Inscriptional_Parthian"),
    c(0x10B46, None, "INSCRIPTIONAL PARTHIAN LETTER ZAYIN", 0x31, "Inscriptional_Parthian"),
    c(0x10B47, None, "INSCRIPTIONAL PARTHIAN LETTER HETH", 0x31, "Inscriptional_Parthian"),
    c(0x10B48, None, "INSCRIPTIONAL PARTHIAN LETTER TETH", 0x31, "Inscriptional_Parthian"),
    c(0x10B49, None, "INSCRIPTIONAL PARTHIAN LETTER YODH", 0x31, "Inscriptional_Parthian"),
    c(0x10B4A, None, "INSCRIPTIONAL PARTHIAN LETTER KAPH", 0x31, "Inscriptional_Parthian"),
    c(0x10B4B, None, "INSCRIPTIONAL PARTHIAN LETTER LAMEDH", 0x31, "Inscriptional_Parthian"),
    c(0x10B4C, None, "INSCRIPTIONAL PARTHIAN LETTER MEM", 0x31, "Inscriptional_Parthian"),
    c(0x10B4D, None, "INSCRIPTIONAL PARTHIAN LETTER NUN", 0x31, "Inscriptional_Parthian"),
    c(0x10B4E, None, "INSCRIPTIONAL PARTHIAN LETTER SAMEKH", 0x31, "Inscriptional_Parthian"),
    c(0x10B4F, None, "INSCRIPTIONAL PARTHIAN LETTER AYIN", 0x31, "Inscriptional_Parthian"),
    c(0x10B50, None, "INSCRIPTIONAL PARTHIAN LETTER PE", 0x31, "Inscriptional_Parthian"),
    c(0x10B51, None, "INSCRIPTIONAL PARTHIAN LETTER SADHE", 0x31, "Inscriptional_Parthian"),
    c(0x10B52, None, "INSCRIPTIONAL PARTHIAN LETTER QOPH", 0x31, "Inscriptional_Parthian"),
    c(0x10B53, None, "INSCRIPTIONAL PARTHIAN LETTER RESH", 0x31, "Inscriptional_Parthian"),
    c(0x10B54, None, "INSCRIPTIONAL PARTHIAN LETTER SHIN", 0x31, "Inscriptional_Parthian"),
    c(0x10B55, None, "INSCRIPTIONAL PARTHIAN LETTER TAW", 0x31, "Inscriptional_Parthian"),
    c(0x10B58, None, "INSCRIPTIONAL PARTHIAN NUMBER ONE", 0x00, "Inscriptional_Parthian"),
    c(0x10B59, None, "INSCRIPTIONAL PARTHIAN NUMBER TWO", 0x00, "Inscriptional_Parthian"),
    c(0x10B5A, None, "INSCRIPTIONAL PARTHIAN NUMBER THREE", 0x00, "Inscriptional_Parthian"),
    c(0x10B5B, None, "INSCRIPTIONAL PARTHIAN NUMBER FOUR", 0x00, "Inscriptional_Parthian"),
    c(0x10B5C, None, "INSCRIPTIONAL PARTHIAN NUMBER TEN", 0x00, "Inscriptional_Parthian"),
    c(0x10B5D, None, "INSCRIPTIONAL PARTHIAN NUMBER TWENTY", 0x00, "Inscriptional_Parthian"),
    c(0x10B5E, None, "INSCRIPTIONAL PARTHIAN NUMBER ONE HUNDRED", 0x00, "Inscriptional_Parthian"),
    c(0x10B5F, None, "INSCRIPTIONAL PARTHIAN NUMBER ONE THOUSAND", 0x00, "Inscriptional_Parthian"),
    c(0x10B60, None, "INSCRIPTIONAL PAHLAVI LETTER ALEPH", 0x31, "Inscriptional_Pahlavi"),
    c(0x10B61, None, "INSCRIPTIONAL PAHLAVI LETTER BETH", 0x31, "Inscriptional_Pahlavi"),
    c(0x10B62, None, "INSCRIPTIONAL PAHLAVI LETTER GIMEL", 0x31, "Inscriptional_Pahlavi"),
    c(0x10B63, None, "INSCRIPTIONAL PAHLAVI LETTER DALETH", 0x31, "Inscriptional_Pahlavi"),
    c(0x10B64, None, "INSCRIPTIONAL PAHLAVI LETTER HE", 0x31, "Inscriptional_Pahlavi"),
    c(0x10B65, None, "INSCRIPTIONAL PAHLAVI LETTER WAW-AYIN-RESH", 0x31, "Inscriptional_Pahlavi"),
    c(0x10B66, None, "INSCRIPTIONAL PAHLAVI LETTER ZAYIN", 0x31, "Inscriptional_Pahlavi"),
    c(0x10B67, None, "INSCRIPTIONAL PAHLAVI LETTER HETH", 0x31, "Inscriptional_Pahlavi"),
    c(0x10B68, None, "INSCRIPTIONAL PAHLAVI LETTER TETH", 0x31, "Inscriptional_Pahlavi"),
    c(0x10B69, None, "INSCRIPTIONAL PAHLAVI LETTER YODH", 0x31, "Inscriptional_Pahlavi"),
    c(0x10B6A, None, "INSCRIPTIONAL PAHLAVI LETTER KAPH", 0x31, "Inscriptional_Pahlavi"),
    c(0x10B6B, None, "INSCRIPTIONAL PAHLAVI LETTER LAMEDH", 0x31, "Inscriptional_Pahlavi"),
    c(0x10B6C, None, "INSCRIPTIONAL PAHLAVI LETTER MEM-QOPH", 0x31, "Inscriptional_Pahlavi"),
    c(0x10B6D, None, "INSCRIPTIONAL PAHLAVI LETTER NUN", 0x31, "Inscriptional_Pahlavi"),
    c(0x10B6E, None, "INSCRIPTIONAL PAHLAVI LETTER SAMEKH", 0x31, "Inscriptional_Pahlavi"),
    c(0x10B6F, None, "INSCRIPTIONAL PAHLAVI LETTER PE", 0x31, "Inscriptional_Pahlavi"),
    c(0x10B70, None, "INSCRIPTIONAL PAHLAVI LETTER SADHE", 0x31, "Inscriptional_Pahlavi"),
    c(0x10B71, None, "INSCRIPTIONAL PAHLAVI LETTER SHIN", 0x31, "Inscriptional_Pahlavi"),
    c(0x10B72, None, "INSCRIPTIONAL PAHLAVI LETTER TAW", 0x31, "Inscriptional_Pahlavi"),
    c(0x10B78, None, "INSCRIPTIONAL PAHLAVI NUMBER ONE", 0x00, "Inscriptional_Pahlavi"),
    c(0x10B79, None, "INSCRIPTIONAL PAHLAVI NUMBER TWO", 0x00, "Inscriptional_Pahlavi"),
    c(0x10B7A, None, "INSCRIPTIONAL PAHLAVI NUMBER THREE", 0x00, "Inscriptional_Pahlavi"),
    c(0x10B7B, None, "INSCRIPTIONAL PAHLAVI NUMBER FOUR", 0x00, "Inscriptional_Pahlavi"),
    c(0x10B7C, None, "INSCRIPTIONAL PAHLAVI NUMBER TEN", 0x00, "Inscriptional_Pahlavi"),
    c(0x10B7D, None, "INSCRIPTIONAL PAHLAVI NUMBER TWENTY", 0x00, "Inscriptional_Pahlavi"),
    c(0x10B7E, None, "INSCRIPTIONAL PAHLAVI NUMBER ONE HUNDRED", 0x00, "Inscriptional_Pahlavi"),
    c(0x10B7F, None, "INSCRIPTIONAL PAHLAVI NUMBER ONE THOUSAND", 0x00, "Inscriptional_Pahlavi"),
    c(0x10B80, None, "PSALTER PAHLAVI LETTER ALEPH", 0x31, "Psalter_Pahlavi"),
    c(0x10B81, None, "PSALTER PAHLAVI LETTER BETH", 0x31, "Psalter_Pahlavi"),
    c(0x10B82, None, "PSALTER PAHLAVI LETTER GIMEL", 0x31, "Psalter_Pahlavi"),
    c(0x10B83, None, "PSALTER PAHLAVI LETTER DALETH", 0x31, "Psalter_Pahlavi"),
    c(0x10B84, None, "PSALTER PAHLAVI LETTER HE", 0x31, "Psalter_Pahlavi"),
    c(0x10B85, None, "PSALTER PAHLAVI LETTER WAW-AYIN-RESH", 0x31, "Psalter_Pahlavi"),
    c(0x10B86, None, "PSALTER PAHLAVI LETTER ZAYIN", 0x31, "Psalter_Pahlavi"),
    c(0x10B87, None, "PSALTER PAHLAVI LETTER HETH", 0x31, "Psalter_Pahlavi"),
    c(0x10B88, None, "PSALTER PAHLAVI LETTER YODH", 0x31, "Psalter_Pahlavi"),
    c(0x10B89, None, "PSALTER PAHLAVI LETTER KAPH", 0x31, "Psalter_Pahlavi"),
    c(0x10B8A, None, "PSALTER PAHLAVI LETTER LAMEDH", 0x31, "Psalter_Pahlavi"),
    c(0x10B8B, None, "PSALTER PAHLAVI LETTER MEM-QOPH", 0x31, "Psalter_Pahlavi"),
    c(0x10B8C, None, "PSALTER PAHLAVI LETTER NUN", 0x31, "Psalter_Pahlavi"),
    c(0x10B8D, None, "PSALTER PAHLAVI LETTER SAMEKH", 0x31, "Psalter_Pahlavi"),
    c(0x10B8E, None, "PSALTER PAHLAVI LETTER PE", 0x31, "Psalter_Pahlavi"),
    c(0x10B8F, None, "PSALTER PAHLAVI LETTER SADHE", 0x31, "Psalter_Pahlavi"),
    c(0x10B90, None, "PSALTER PAHLAVI LETTER SHIN", 0x31, "Psalter_Pahlavi"),
    c(0x10B91, None, "PSALTER PAHLAVI LETTER TAW", 0x31, "Psalter_Pahlavi"),
    c(0x10B99, None, "PSALTER PAHLAVI SECTION MARK", 0x00, "Psalter_Pahlavi"),
    c(0x10B9A, None, "PSALTER PAHLAVI TURNED SECTION MARK", 0x00, "Psalter_Pahlavi"),
    c(0x10B9B, None, "PSALTER PAHLAVI FOUR DOTS WITH CROSS", 0x00, "Psalter_Pahlavi"),
    c(0x10B9C, None, "PSALTER PAHLAVI FOUR DOTS WITH DOT", 0x00, "Psalter_Pahlavi"),
    c(0x10BA9, None, "PSALTER PAHLAVI NUMBER ONE", 0x00, "Psalter_Pahlavi"),
    c(0x10BAA, None, "PSALTER PAHLAVI NUMBER TWO", 0x00, "Psalter_Pahlavi"),
    c(0x10BAB, None, "PSALTER PAHLAVI NUMBER THREE", 0x00, "Psalter_Pahlavi"),
    c(0x10BAC, None, "PSALTER PAHLAVI NUMBER FOUR", 0x00, "Psalter_Pahlavi"),
    c(0x10BAD, None, "PSALTER PAHLAVI NUMBER TEN", 0x00, "Psalter_Pahlavi"),
    c(0x10BAE, None, "PSALTER PAHLAVI NUMBER TWENTY", 0x00, "Psalter_Pahlavi"),
    c(0x10BAF, None, "PSALTER PAHLAVI NUMBER ONE HUNDRED", 0x00, "Psalter_Pahlavi"),
    c(0x10C00, None, "OLD TURKIC LETTER ORKHON A", 0x31, "Old_Turkic"),
    c(0x10C01, None, "OLD TURKIC LETTER YENISEI A", 0x31, "Old_Turkic"),
    c(0x10C02, None, "OLD TURKIC LETTER YENISEI AE", 0x31, "Old_Turkic"),
    c(0x10C03, None, "OLD TURKIC LETTER ORKHON I", 0x31, "Old_Turkic"),
    c(0x10C04, None, "OLD TURKIC LETTER YENISEI I", 0x31, "Old_Turkic"),
    c(0x10C05, None, "OLD TURKIC LETTER YENISEI E", 0x31, "Old_Turkic"),
    c(0x10C06, None, "OLD TURKIC LETTER ORKHON O", 0x31, "Old_Turkic"),
    c(0x10C07, None, "OLD TURKIC LETTER ORKHON OE", 0x31, "Old_Turkic"),
    c(0x10C08, None, "OLD TURKIC LETTER YENISEI OE", 0x31, "Old_Turkic"),
    c(0x10C09, None, "OLD TURKIC LETTER ORKHON AB", 0x31, "Old_Turkic"),
    c(0x10C0A, None, "OLD TURKIC LETTER YENISEI AB", 0x31, "Old_Turkic"),
    c(0x10C0B, None, "OLD TURKIC LETTER ORKHON AEB", 0x31, "Old_Turkic"),
    c(0x10C0C, None, "OLD TURKIC LETTER YENISEI AEB", 0x31, "Old_Turkic"),
    c(0x10C0D, None, "OLD TURKIC LETTER ORKHON AG", 0x31, "Old_Turkic"),
    c(0x10C0E, None, "OLD TURKIC LETTER YENISEI AG", 0x31, "Old_Turkic"),
    c(0x10C0F, None, "OLD TURKIC LETTER ORKHON AEG", 0x31, "Old_Turkic"),
    c(0x10C10, None, "OLD TURKIC LETTER YENISEI AEG", 0x31, "Old_Turkic"),
    c(0x10C11, None, "OLD TURKIC LETTER ORKHON AD", 0x31, "Old_Turkic"),
    c(0x10C12, None, "OLD TURKIC LETTER YENISEI AD", 0x31, "Old_Turkic"),
    c(0x10C13, None, "OLD TURKIC LETTER ORKHON AED", 0x31, "Old_Turkic"),
    c(0x10C14, None, "OLD TURKIC LETTER ORKHON EZ", 0x31, "Old_Turkic"),
    c(0x10C15, None, "OLD TURKIC LETTER YENISEI EZ", 0x31, "Old_Turkic"),
    c(0x10C16, None, "OLD TURKIC LETTER ORKHON AY", 0x31, "Old_Turkic"),
    c(0x10C17, None, "OLD TURKIC LETTER YENISEI AY", 0x31, "Old_Turkic"),
    c(0x10C18, None, "OLD TURKIC LETTER ORKHON AEY", 0x31, "Old_Turkic"),
    c(0x10C19, None, "OLD TURKIC LETTER YENISEI AEY", 0x31, "Old_Turkic"),
    c(0x10C1A, None, "OLD TURKIC LETTER ORKHON AEK", 0x31, "Old_Turkic"),
    c(0x10C1B, None, "OLD TURKIC LETTER YENISEI AEK", 0x31, "Old_Turkic"),
    c(0x10C1C, None, "OLD TURKIC LETTER ORKHON OEK", 0x31, "Old_Turkic"),
    c(0x10C1D, None, "OLD TURKIC LETTER YENISEI OEK", 0x31, "Old_Turkic"),
    c(0x10C1E, None, "OLD TURKIC LETTER ORKHON AL", 0x31, "Old_Turkic"),
    c(0x10C1F, None, "OLD TURKIC LETTER YENISEI AL", 0x31, "Old_Turkic"),
    c(0x10C20, None, "OLD TURKIC LETTER ORKHON AEL", 0x31, "Old_Turkic"),
    c(0x10C21, None, "OLD TURKIC LETTER ORKHON ELT", 0x31, "Old_Turkic"),
    c(0x10C22, None, "OLD TURKIC LETTER ORKHON EM", 0x31, "Old_Turkic"),
    c(0x10C23, None, "OLD TURKIC LETTER ORKHON AN", 0x31, "Old_Turkic"),
    c(0x10C24, None, "OLD TURKIC LETTER ORKHON AEN", 0x31, "Old_Turkic"),
    c(0x10C25, None, "OLD TURKIC LETTER YENISEI AEN", 0x31, "Old_Turkic"),
    c(0x10C26, None, "OLD TURKIC LETTER ORKHON ENT", 0x31, "Old_Turkic"),
    c(0x10C27, None, "OLD TURKIC LETTER YENISEI ENT", 0x31, "Old_Turkic"),
    c(0x10C28, None, "OLD TURKIC LETTER ORKHON ENC", 0x31, "Old_Turkic"),
    c(0x10C29, None, "OLD TURKIC LETTER YENISEI ENC", 0x31, "Old_Turkic"),
    c(0x10C2A, None, "OLD TURKIC LETTER ORKHON ENY", 0x31, "Old_Turkic"),
    c(0x10C2B, None, "OLD TURKIC LETTER YENISEI ENY", 0x31, "Old_Turkic"),
    c(0x10C2C, None, "OLD TURKIC LETTER YENISEI ANG", 0x31, "Old_Turkic"),
    c(0x10C2D, None, "OLD TURKIC LETTER ORKHON ENG", 0x31, "Old_Turkic"),
    c(0x10C2E, None, "OLD TURKIC LETTER YENISEI AENG", 0x31, "Old_Turkic"),
    c(0x10C2F, None, "OLD TURKIC LETTER ORKHON EP", 0x31, "Old_Turkic"),
    c(0x10C30, None, "OLD TURKIC LETTER ORKHON OP", 0x31, "Old_Turkic"),
    c(0x10C31, None, "OLD TURKIC LETTER ORKHON IC", 0x31, "Old_Turkic"),
    c(0x10C32, None, "OLD TURKIC LETTER ORKHON EC", 0x31, "Old_Turkic"),
    c(0x10C33, None, "OLD TURKIC LETTER YENISEI EC", 0x31, "Old_Turkic"),
    c(0x10C34, None, "OLD TURKIC LETTER ORKHON AQ", 0x31, "Old_Turkic"),
    c(0x10C35, None, "OLD TURKIC LETTER YENISEI AQ", 0x31, "Old_Turkic"),
    c(0x10C36, None, "OLD TURKIC LETTER ORKHON IQ", 0x31, "Old_Turkic"),
    c(0x10C37, None, "OLD TURKIC LETTER YENISEI IQ", 0x31, "Old_Turkic"),
    c(0x10C38, None, "OLD TURKIC LETTER ORKHON OQ", 0x31, "Old_Turkic"),
    c(0x10C39, None, "OLD TURKIC LETTER YENISEI OQ", 0x31, "Old_Turkic"),
    c(0x10C3A, None, "OLD TURKIC LETTER ORKHON AR", 0x31, "Old_Turkic"),
    c(0x10C3B, None, "OLD TURKIC LETTER YENISEI AR", 0x31, "Old_Turkic"),
    c(0x10C3C, None, "OLD TURKIC LETTER ORKHON AER", 0x31, "Old_Turkic"),
    c(0x10C3D, None, "OLD TURKIC LETTER ORKHON AS", 0x31, "Old_Turkic"),
    c(0x10C3E, None, "OLD TURKIC LETTER ORKHON AES", 0x31, "Old_Turkic"),
    c(0x10C3F, None, "OLD TURKIC LETTER ORKHON ASH", 0x31, "Old_Turkic"),
    c(0x10C40, None, "OLD TURKIC LETTER YENISEI ASH", 0x31, "Old_Turkic"),
    c(0x10C41, None, "OLD TURKIC LETTER ORKHON ESH", 0x31, "Old_Turkic"),
    c(0x10C42, None, "OLD TURKIC LETTER YENISEI ESH", 0x31, "Old_Turkic"),
    c(0x10C43, None, "OLD TURKIC LETTER ORKHON AT", 0x31, "Old_Turkic"),
    c(0x10C44, None, "OLD TURKIC LETTER YENISEI AT", 0x31, "Old_Turkic"),
    c(0x10C45, None, "OLD TURKIC LETTER ORKHON AET", 0x31, "Old_Turkic"),
    c(0x10C46, None, "OLD TURKIC LETTER YENISEI AET", 0x31, "Old_Turkic"),
    c(0x10C47, None, "OLD TURKIC LETTER ORKHON OT", 0x31, "Old_Turkic"),
    c(0x10C48, None, "OLD TURKIC LETTER ORKHON BASH", 0x31, "Old_Turkic"),
    c(0x10C80, None, "OLD HUNGARIAN CAPITAL LETTER A", 0x31, "Old_Hungarian"),
    c(0x10C81, None, "OLD HUNGARIAN CAPITAL LETTER AA", 0x31, "Old_Hungarian"),
    c(0x10C82, None, "OLD HUNGARIAN CAPITAL LETTER EB", 0x31, "Old_Hungarian"),
    c(0x10C83, None, "OLD HUNGARIAN CAPITAL LETTER AMB", 0x31, "Old_Hungarian"),
    c(0x10C84, None, "OLD HUNGARIAN CAPITAL LETTER EC", 0x31, "Old_Hungarian"),
    c(0x10C85, None, "OLD HUNGARIAN CAPITAL LETTER ENC", 0x31, "Old_Hungarian"),
    c(0x10C86, None, "OLD HUNGARIAN CAPITAL LETTER ECS", 0x31, "Old_Hungarian"),
    c(0x10C87, None, "OLD HUNGARIAN CAPITAL LETTER ED", 0x31, "Old_Hungarian"),
    c(0x10C88, None, "OLD HUNGARIAN CAPITAL LETTER AND", 0x31, "Old_Hungarian"),
    c(0x10C89, None, "OLD HUNGARIAN CAPITAL LETTER E", 0x31, "Old_Hungarian"),
    c(0x10C8A, None, "OLD HUNGARIAN CAPITAL LETTER CLOSE E", 0x31, "Old_Hungarian"),
    c(0x10C8B, None, "OLD HUNGARIAN CAPITAL LETTER EE", 0x31, "Old_Hungarian"),
    c(0x10C8C, None, "OLD HUNGARIAN CAPITAL LETTER EF", 0x31, "Old_Hungarian"),
    c(0x10C8D, None, "OLD HUNGARIAN CAPITAL LETTER EG", 0x31, "Old_Hungarian"),
    c(0x10C8E, None, "OLD HUNGARIAN CAPITAL LETTER EGY", 0x31, "Old_Hungarian"),
    c(0x10C8F, None, "OLD HUNGARIAN CAPITAL LETTER EH", 0x31, "Old_Hungarian"),
    c(0x10C90, None, "OLD HUNGARIAN CAPITAL LETTER I", 0x31, "Old_Hungarian"),
    c(0x10C91, None, "OLD HUNGARIAN CAPITAL LETTER II", 0x31, "Old_Hungarian"),
    c(0x10C92, None, "OLD HUNGARIAN CAPITAL LETTER EJ", 0x31, "Old_Hungarian"),
    c(0x10C93, None, "OLD HUNGARIAN CAPITAL LETTER EK", 0x31, "Old_Hungarian"),
    c(0x10C94, None, "OLD HUNGARIAN CAPITAL LETTER AK", 0x31, "Old_Hungarian"),
    c(0x10C95, None, "OLD HUNGARIAN CAPITAL LETTER UNK", 0x31, "Old_Hungarian"),
    c(0x10C96, None, "OLD HUNGARIAN CAPITAL LETTER EL", 0x31, "Old_Hungarian"),
    c(0x10C97, None, "OLD HUNGARIAN CAPITAL LETTER ELY", 0x31, "Old_Hungarian"),
    c(0x10C98, None, "OLD HUNGARIAN CAPITAL LETTER EM", 0x31, "Old_Hungarian"),
    c(0x10C99, None, "OLD HUNGARIAN CAPITAL LETTER EN", 0x31, "Old_Hungarian"),
    c(0x10C9A, None, "OLD HUNGARIAN CAPITAL LETTER ENY", 0x31, "Old_Hungarian"),
    c(0x10C9B, None, "OLD HUNGARIAN CAPITAL LETTER O", 0x31, "Old_Hungarian"),
    c(0x10C9C, None, "OLD HUNGARIAN CAPITAL LETTER OO", 0x31, "Old_Hungarian"),
    c(0x10C9D, None, "OLD HUNGARIAN CAPITAL LETTER NIKOLSBURG OE", 0x31, "Old_Hungarian"),
    c(0x10C9E, None, "OLD HUNGARIAN CAPITAL LETTER RUDIMENTA OE", 0x31, "Old_Hungarian"),
    c(0x10C9F, None, "OLD HUNGARIAN CAPITAL LETTER OEE", 0x31, "Old_Hungarian"),
    c(0x10CA0, None, "OLD HUNGARIAN CAPITAL LETTER EP", 0x31, "Old_Hungarian"),
    c(0x10CA1, None, "OLD HUNGARIAN CAPITAL LETTER EMP", 0x31, "Old_Hungarian"),
    c(0x10CA2, None, "OLD HUNGARIAN CAPITAL LETTER ER", 0x31, "Old_Hungarian"),
    c(0x10CA3, None, "OLD HUNGARIAN CAPITAL LETTER SHORT ER", 0x31, "Old_Hungarian"),
    c(0x10CA4, None, "OLD HUNGARIAN CAPITAL LETTER ES", 0x31, "Old_Hungarian"),
    c(0x10CA5, None, "OLD HUNGARIAN CAPITAL LETTER ESZ", 0x31, "Old_Hungarian"),
    c(0x10CA6, None, "OLD HUNGARIAN CAPITAL LETTER ET", 0x31, "Old_Hungarian"),
    c(0x10CA7, None, "OLD HUNGARIAN CAPITAL LETTER ENT", 0x31, "Old_Hungarian"),
    c(0x10CA8, None, "OLD HUNGARIAN CAPITAL LETTER ETY", 0x31, "Old_Hungarian"),
    c(0x10CA9, None, "OLD HUNGARIAN CAPITAL LETTER ECH", 0x31, "Old_Hungarian"),
    c(0x10CAA, None, "OLD HUNGARIAN CAPITAL LETTER U", 0x31, "Old_Hungarian"),
    c(0x10CAB, None, "OLD HUNGARIAN CAPITAL LETTER UU", 0x31, "Old_Hungarian"),
    c(0x10CAC, None, "OLD HUNGARIAN CAPITAL LETTER NIKOLSBURG UE", 0x31, "Old_Hungarian"),
    c(0x10CAD, None, "OLD HUNGARIAN CAPITAL LETTER RUDIMENTA UE", 0x31, "Old_Hungarian"),
    c(0x10CAE, None, "OLD HUNGARIAN CAPITAL LETTER EV", 0x31, "Old_Hungarian"),
    c(0x10CAF, None, "OLD HUNGARIAN CAPITAL LETTER EZ", 0x31, "Old_Hungarian"),
    c(0x10CB0, None, "OLD HUNGARIAN CAPITAL LETTER EZS", 0x31, "Old_Hungarian"),
    c(0x10CB1, None, "OLD HUNGARIAN CAPITAL LETTER ENT-SHAPED SIGN", 0x31, "Old_Hungarian"),
    c(0x10CB2, None, "OLD HUNGARIAN CAPITAL LETTER US", 0x31, "Old_Hungarian"),
    c(0x10CC0, None, "OLD HUNGARIAN SMALL LETTER A", 0x31, "Old_Hungarian"),
    c(0x10CC1, None, "OLD HUNGARIAN SMALL LETTER AA", 0x31, "Old_Hungarian"),
    c(0x10CC2, None, "OLD HUNGARIAN SMALL LETTER EB", 0x31, "Old_Hungarian"),
    c(0x10CC3, None, "OLD HUNGARIAN SMALL LETTER AMB", 0x31, "Old_Hungarian"),
    c(0x10CC4, None, "OLD HUNGARIAN SMALL LETTER EC", 0x31, "Old_Hungarian"),
    c(0x10CC5, None, "OLD HUNGARIAN SMALL LETTER ENC", 0x31, "Old_Hungarian"),
    c(0x10CC6, None, "OLD HUNGARIAN SMALL LETTER ECS", 0x31, "Old_Hungarian"),
    c(0x10CC7, None, "OLD HUNGARIAN SMALL LETTER ED", 0x31, "Old_Hungarian"),
    c(0x10CC8, None, "OLD HUNGARIAN SMALL LETTER AND", 0x31, "Old_Hungarian"),
    c(0x10CC9, None, "OLD HUNGARIAN SMALL LETTER E", 0x31, "Old_Hungarian"),
    c(0x10CCA, None, "OLD HUNGARIAN SMALL LETTER CLOSE E", 0x31, "Old_Hungarian"),
    c(0x10CCB, None, "OLD HUNGARIAN SMALL LETTER EE", 0x31, "Old_Hungarian"),
    c(0x10CCC, None, "OLD HUNGARIAN SMALL LETTER EF", 0x31, "Old_Hungarian"),
    c(0x10CCD, None, "OLD HUNGARIAN SMALL LETTER EG", 0x31, "Old_Hungarian"),
    c(0x10CCE, None, "OLD HUNGARIAN SMALL LETTER EGY", 0x31, "Old_Hungarian"),
    c(0x10CCF, None, "OLD HUNGARIAN SMALL LETTER EH", 0x31, "Old_Hungarian"),
    c(0x10CD0, None, "OLD HUNGARIAN SMALL LETTER I", 0x31, "Old_Hungarian"),
    c(0x10CD1, None, "OLD HUNGARIAN SMALL LETTER II", 0x31, "Old_Hungarian"),
    c(0x10CD2, None, "OLD HUNGARIAN SMALL LETTER EJ", 0x31, "Old_Hungarian"),
    c(0x10CD3, None, "OLD HUNGARIAN SMALL LETTER EK", 0x31, "Old_Hungarian"),
    c(0x10CD4, None, "OLD HUNGARIAN SMALL LETTER AK", 0x31, "Old_Hungarian"),
    c(0x10CD5, None, "OLD HUNGARIAN SMALL LETTER UNK", 0x31, "Old_Hungarian"),
    c(0x10CD6, None, "OLD HUNGARIAN SMALL LETTER EL", 0x31, "Old_Hungarian"),
    c(0x10CD7, None, "OLD HUNGARIAN SMALL LETTER ELY", 0x31, "Old_Hungarian"),
    c(0x10CD8, None, "OLD HUNGARIAN SMALL LETTER EM", 0x31, "Old_Hungarian"),
    c(0x10CD9, None, "OLD HUNGARIAN SMALL LETTER EN", 0x31, "Old_Hungarian"),
    c(0x10CDA, None, "OLD HUNGARIAN SMALL LETTER ENY", 0x31, "Old_Hungarian"),
    c(0x10CDB, None, "OLD HUNGARIAN SMALL LETTER O", 0x31, "Old_Hungarian"),
    c(0x10CDC, None, "OLD HUNGARIAN SMALL LETTER OO", 0x31, "Old_Hungarian"),
    c(0x10CDD, None, "OLD HUNGARIAN SMALL LETTER NIKOLSBURG OE", 0x31, "Old_Hungarian"),
    c(0x10CDE, None, "OLD HUNGARIAN SMALL LETTER RUDIMENTA OE", 0x31, "Old_Hungarian"),
    c(0x10CDF, None, "OLD HUNGARIAN SMALL LETTER OEE", 0x31, "Old_Hungarian"),
    c(0x10CE0, None, "OLD HUNGARIAN SMALL LETTER EP", 0x31, "Old_Hungarian"),
    c(0x10CE1, None, "OLD HUNGARIAN SMALL LETTER EMP", 0x31, "Old_Hungarian"),
    c(0x10CE2, None, "OLD HUNGARIAN SMALL LETTER ER", 0x31, "Old_Hungarian"),
    c(0x10CE3, None, "OLD HUNGARIAN SMALL LETTER SHORT ER", 0x31, "Old_Hungarian"),
    c(0x10CE4, None, "OLD HUNGARIAN SMALL LETTER ES", 0x31, "Old_Hungarian"),
    c(0x10CE5, None, "OLD HUNGARIAN SMALL LETTER ESZ", 0x31, "Old_Hungarian"),
    c(0x10CE6, None, "OLD HUNGARIAN SMALL LETTER ET", 0x31, "Old_Hungarian"),
    c(0x10CE7, None, "OLD HUNGARIAN SMALL LETTER ENT", 0x31, "Old_Hungarian"),
    c(0x10CE8, None, "OLD HUNGARIAN SMALL LETTER ETY", 0x31, "Old_Hungarian"),
    c(0x10CE9, None, "OLD HUNGARIAN SMALL LETTER ECH", 0x31, "Old_Hungarian"),
    c(0x10CEA, None, "OLD HUNGARIAN SMALL LETTER U", 0x31, "Old_Hungarian"),
    c(0x10CEB, None, "OLD HUNGARIAN SMALL LETTER UU", 0x31, "Old_Hungarian"),
    c(0x10CEC, None, "OLD HUNGARIAN SMALL LETTER NIKOLSBURG UE", 0x31, "Old_Hungarian"),
    c(0x10CED, None, "OLD HUNGARIAN SMALL LETTER RUDIMENTA UE", 0x31, "Old_Hungarian"),
    c(0x10CEE, None, "OLD HUNGARIAN SMALL LETTER EV", 0x31, "Old_Hungarian"),
    c(0x10CEF, None, "OLD HUNGARIAN SMALL LETTER EZ", 0x31, "Old_Hungarian"),
    c(0x10CF0, None, "OLD HUNGARIAN SMALL LETTER EZS", 0x31, "Old_Hungarian"),
    c(0x10CF1, None, "OLD HUNGARIAN SMALL LETTER ENT-SHAPED SIGN", 0x31, "Old_Hungarian"),
    c(0x10CF2, None, "OLD HUNGARIAN SMALL LETTER US", 0x31, "Old_Hungarian"),
    c(0x10CFA, None, "OLD HUNGARIAN NUMBER ONE", 0x00, "Old_Hungarian"),
    c(0x10CFB, None, "OLD HUNGARIAN NUMBER FIVE", 0x00, "Old_Hungarian"),
    c(0x10CFC, None, "OLD HUNGARIAN NUMBER TEN", 0x00, "Old_Hungarian"),
    c(0x10CFD, None, "OLD HUNGARIAN NUMBER FIFTY", 0x00, "Old_Hungarian"),
    c(0x10CFE, None, "OLD HUNGARIAN NUMBER ONE HUNDRED", 0x00, "Old_Hungarian"),
    c(0x10CFF, None, "OLD HUNGARIAN NUMBER ONE THOUSAND", 0x00, "Old_Hungarian"),
    c(0x10D00, None, "HANIFI ROHINGYA LETTER A", 0x31, "Hanifi_Rohingya"),
    c(0x10D01, None, "HANIFI ROHINGYA LETTER BA", 0x31, "Hanifi_Rohingya"),
    c(0x10D02, None, "HANIFI ROHINGYA LETTER PA", 0x31, "Hanifi_Rohingya"),
    c(0x10D03, None, "HANIFI ROHINGYA LETTER TA", 0x31, "Hanifi_Rohingya"),
    c(0x10D04, None, "HANIFI ROHINGYA LETTER TTA", 0x31, "Hanifi_Rohingya"),
    c(0x10D05, None, "HANIFI ROHINGYA LETTER JA", 0x31, "Hanifi_Rohingya"),
    c(0x10D06, None, "HANIFI ROHINGYA LETTER CA", 0x31, "Hanifi_Rohingya"),
    c(0x10D07, None, "HANIFI ROHINGYA LETTER HA", 0x31, "Hanifi_Rohingya"),
    c(0x10D08, None, "HANIFI ROHINGYA LETTER KHA", 0x31, "Hanifi_Rohingya"),
    c(0x10D09, None, "HANIFI ROHINGYA LETTER FA", 0x31, "Hanifi_Rohingya"),
    c(0x10D0A, None, "HANIFI ROHINGYA LETTER DA", 0x31, "Hanifi_Rohingya"),
    c(0x10D0B, None, "HANIFI ROHINGYA LETTER DDA", 0x31, "Hanifi_Rohingya"),
    c(0x10D0C, None, "HANIFI ROHINGYA LETTER RA", 0x31, "Hanifi_Rohingya"),
    c(0x10D0D, None, "HANIFI ROHINGYA LETTER RRA", 0x31, "Hanifi_Rohingya"),
    c(0x10D0E, None, "HANIFI ROHINGYA LETTER ZA", 0x31, "Hanifi_Rohingya"),
    c(0x10D0F, None, "HANIFI ROHINGYA LETTER SA", 0x31, "Hanifi_Rohingya"),
    c(0x10D10, None, "HANIFI ROHINGYA LETTER SHA", 0x31, "Hanifi_Rohingya"),
    c(0x10D11, None, "HANIFI ROHINGYA LETTER KA", 0x31, "Hanifi_Rohingya"),
    c(0x10D12, None, "HANIFI ROHINGYA LETTER GA", 0x31, "Hanifi_Rohingya"),
    c(0x10D13, None, "HANIFI ROHINGYA LETTER LA", 0x31, "Hanifi_Rohingya"),
    c(0x10D14, None, "HANIFI ROHINGYA LETTER MA", 0x31, "Hanifi_Rohingya"),
    c(0x10D15, None, "HANIFI ROHINGYA LETTER NA", 0x31, "Hanifi_Rohingya"),
    c(0x10D16, None, "HANIFI ROHINGYA LETTER WA", 0x31, "Hanifi_Rohingya"),
    c(0x10D17, None, "HANIFI ROHINGYA LETTER KINNA WA", 0x31, "Hanifi_Rohingya"),
    c(0x10D18, None, "HANIFI ROHINGYA LETTER YA", 0x31, "Hanifi_Rohingya"),
    c(0x10D19, None, "HANIFI ROHINGYA LETTER KINNA YA", 0x31, "Hanifi_Rohingya"),
    c(0x10D1A, None, "HANIFI ROHINGYA LETTER NGA", 0x31, "Hanifi_Rohingya"),
    c(0x10D1B, None, "HANIFI ROHINGYA LETTER NYA", 0x31, "Hanifi_Rohingya"),
    c(0x10D1C, None, "HANIFI ROHINGYA LETTER VA", 0x31, "Hanifi_Rohingya"),
    c(0x10D1D, None, "HANIFI ROHINGYA VOWEL A", 0x31, "Hanifi_Rohingya"),
    c(0x10D1E, None, "HANIFI ROHINGYA VOWEL I", 0x31, "Hanifi_Rohingya"),
    c(0x10D1F, None, "HANIFI ROHINGYA VOWEL U", 0x31, "Hanifi_Rohingya"),
    c(0x10D20, None, "HANIFI ROHINGYA VOWEL E", 0x31, "Hanifi_Rohingya"),
    c(0x10D21, None, "HANIFI ROHINGYA VOWEL O", 0x31, "Hanifi_Rohingya"),
    c(0x10D22, None, "HANIFI ROHINGYA MARK SAKIN", 0x31, "Hanifi_Rohingya"),
    c(0x10D23, None, "HANIFI ROHINGYA MARK NA KHONNA", 0x31, "Hanifi_Rohingya"),
    c(0x10D24, None, "HANIFI ROHINGYA SIGN HARBAHAY", 0x21, "Hanifi_Rohingya"),
    c(0x10D25, None, "HANIFI ROHINGYA SIGN TAHALA", 0x21, "Hanifi_Rohingya"),
    c(0x10D26, None, "HANIFI ROHINGYA SIGN TANA", 0x21, "Hanifi_Rohingya"),
    c(0x10D27, None, "HANIFI ROHINGYA SIGN TASSI", 0x21, "Hanifi_Rohingya"),
    c(0x10D30, None, "HANIFI ROHINGYA DIGIT ZERO", 0x20, "Hanifi_Rohingya"),
    c(0x10D31, None, "HANIFI ROHINGYA DIGIT ONE", 0x20, "Hanifi_Rohingya"),
    c(0x10D32, None, "HANIFI ROHINGYA DIGIT TWO", 0x20, "Hanifi_Rohingya"),
    c(0x10D33, None, "HANIFI ROHINGYA DIGIT THREE", 0x20, "Hanifi_Rohingya"),
    c(0x10D34, None, "HANIFI ROHINGYA DIGIT FOUR", 0x20, "Hanifi_Rohingya"),
    c(0x10D35, None, "HANIFI ROHINGYA DIGIT FIVE", 0x20, "Hanifi_Rohingya"),
    c(0x10D36, None, "HANIFI ROHINGYA DIGIT SIX", 0x20, "Hanifi_Rohingya"),
    c(0x10D37, None, "HANIFI ROHINGYA DIGIT SEVEN", 0x20, "Hanifi_Rohingya"),
    c(0x10D38, None, "HANIFI ROHINGYA DIGIT EIGHT", 0x20, "Hanifi_Rohingya"),
    c(0x10D39, None, "HANIFI ROHINGYA DIGIT NINE", 0x20, "Hanifi_Rohingya"),
    c(0x10E60, None, "RUMI DIGIT ONE", 0x00, "Rumi"),
    c(0x10E61, None, "RUMI DIGIT TWO", 0x00, "Rumi"),
    c(0x10E62, None, "RUMI DIGIT THREE", 0x00, "Rumi"),
    c(0x10E63, None, "RUMI DIGIT FOUR", 0x00, "Rumi"),
    c(0x10E64, None, "RUMI DIGIT FIVE", 0x00, "Rumi"),
    c(0x10E65, None, "RUMI DIGIT SIX", 0x00, "Rumi"),
    c(0x10E66, None, "RUMI DIGIT SEVEN", 0x00, "Rumi"),
    c(0x10E67, None, "RUMI DIGIT EIGHT", 0x00, "Rumi"),
    c(0x10E68, None, "RUMI DIGIT NINE", 0x00, "Rumi"),
    c(0x10E69, None, "RUMI NUMBER TEN", 0x00, "Rumi"),
    c(0x10E6A, None, "RUMI NUMBER TWENTY", 0x00, "Rumi"),
    c(0x10E6B, None, "RUMI NUMBER THIRTY", 0x00, "Rumi"),
    c(0x10E6C, None, "RUMI NUMBER FORTY", 0x00, "Rumi"),
    c(0x10E6D, None, "RUMI NUMBER FIFTY", 0x00, "Rumi"),
    c(0x10E6E, None, "RUMI NUMBER SIXTY", 0x00, "Rumi"),
    c(0x10E6F, None, "RUMI NUMBER SEVENTY", 0x00, "Rumi"),
    c(0x10E70, None, "RUMI NUMBER EIGHTY", 0x00, "Rumi"),
    c(0x10E71, None, "RUMI NUMBER NINETY", 0x00, "Rumi"),
    c(0x10E72, None, "RUMI NUMBER ONE HUNDRED", 0x00, "Rumi"),
    c(0x10E73, None, "RUMI NUMBER TWO HUNDRED", 0x00, "Rumi"),
    c(0x10E74, None, "RUMI NUMBER THREE HUNDRED", 0x00, "Rumi"),
    c(0x10E75, None, "RUMI NUMBER FOUR HUNDRED", 0x00, "Rumi"),
    c(0x10E76, None, "RUMI NUMBER FIVE HUNDRED", 0x00, "Rumi"),
    c(0x10E77, None, "RUMI NUMBER SIX HUNDRED", 0x00, "Rumi"),
    c(0x10E78, None, "RUMI NUMBER SEVEN HUNDRED", 0x00, "Rumi"),
    c(0x10E79, None, "RUMI NUMBER EIGHT HUNDRED", 0x00, "Rumi"),
    c(0x10E7A, None, "RUMI NUMBER NINE HUNDRED", 0x00, "Rumi"),
    c(0x10E7B, None, "RUMI FRACTION ONE HALF", 0x00, "Rumi"),
    c(0x10E7C, None, "RUMI FRACTION ONE QUARTER", 0x00, "Rumi"),
    c(0x10E7D, None, "RUMI FRACTION ONE THIRD", 0x00, "Rumi"),
    c(0x10E7E, None, "RUMI FRACTION TWO THIRDS", 0x00, "Rumi"),
    c(0x10E80, None, "YEZIDI LETTER ELIF", 0x31, "Yezidi"),
    c(0x10E81, None, "YEZIDI LETTER BE", 0x31, "Yezidi"),
    c(0x10E82, None, "YEZIDI LETTER PE", 0x31, "Yezidi"),
    c(0x10E83, None, "YEZIDI LETTER PHE", 0x31, "Yezidi"),
    c(0x10E84, None, "YEZIDI LETTER THE", 0x31, "Yezidi"),
    c(0x10E85, None, "YEZIDI LETTER SE", 0x31, "Yezidi"),
    c(0x10E86, None, "YEZIDI LETTER CIM", 0x31, "Yezidi"),
    c(0x10E87, None, "YEZIDI LETTER CHIM", 0x31, "Yezidi"),
    c(0x10E88, None, "YEZIDI LETTER CHHIM", 0x31, "Yezidi"),
    c(0x10E89, None, "YEZIDI LETTER HHA", 0x31, "Yezidi"),
    c(0x10E8A, None, "YEZIDI LETTER XA", 0x31, "Yezidi"),
    c(0x10E8B, None, "YEZIDI LETTER DAL", 0x31, "Yezidi"),
    c(0x10E8C, None, "YEZIDI LETTER ZAL", 0x31, "Yezidi"),
    c(0x10E8D, None, "YEZIDI LETTER RA", 0x31, "Yezidi"),
    c(0x10E8E, None, "YEZIDI LETTER RHA", 0x31, "Yezidi"),
    c(0x10E8F, None, "YEZIDI LETTER ZA", 0x31, "Yezidi"),
    c(0x10E90, None, "YEZIDI LETTER JA", 0x31, "Yezidi"),
    c(0x10E91, None, "YEZIDI LETTER SIN", 0x31, "Yezidi"),
    c(0x10E92, None, "YEZIDI LETTER SHIN", 0x31, "Yezidi"),
    c(0x10E93, None, "YEZIDI LETTER SAD", 0x31, "Yezidi"),
    c(0x10E94, None, "YEZIDI LETTER DAD", 0x31, "Yezidi"),
    c(0x10E95, None, "YEZIDI LETTER TA", 0x31, "Yezidi"),
    c(0x10E96, None, "YEZIDI LETTER ZE", 0x31, "Yezidi"),
    c(0x10E97, None, "YEZIDI LETTER EYN", 0x31, "Yezidi"),
    c(0x10E98, None, "YEZIDI LETTER XHEYN", 0x31, "Yezidi"),
    c(0x10E99, None, "YEZIDI LETTER FA", 0x31, "Yezidi"),
    c(0x10E9A, None, "YEZIDI LETTER VA", 0x31, "Yezidi"),
    c(0x10E9B, None, "YEZIDI LETTER VA ALTERNATE FORM", 0x31, "Yezidi"),
    c(0x10E9C, None, "YEZIDI LETTER QAF", 0x31, "Yezidi"),
    c(0x10E9D, None, "YEZIDI LETTER KAF", 0x31, "Yezidi"),
    c(0x10E9E, None, "YEZIDI LETTER KHAF", 0x31, "Yezidi"),
    c(0x10E9F, None, "YEZIDI LETTER GAF", 0x31, "Yezidi"),
    c(0x10EA0, None, "YEZIDI LETTER LAM", 0x31, "Yezidi"),
    c(0x10EA1, None, "YEZIDI LETTER MIM", 0x31, "Yezidi"),
    c(0x10EA2, None, "YEZIDI LETTER NUN", 0x31, "Yezidi"),
    c(0x10EA3, None, "YEZIDI LETTER UM", 0x31, "Yezidi"),
    c(0x10EA4, None, "YEZIDI LETTER WAW", 0x31, "Yezidi"),
    c(0x10EA5, None, "YEZIDI LETTER OW", 0x31, "Yezidi"),
    c(0x10EA6, None, "YEZIDI LETTER EW", 0x31, "Yezidi"),
    c(0x10EA7, None, "YEZIDI LETTER HAY", 0x31, "Yezidi"),
    c(0x10EA8, None, "YEZIDI LETTER YOT", 0x31, "Yezidi"),
    c(0x10EA9, None, "YEZIDI LETTER ET", 0x31, "Yezidi"),
    c(0x10EAB, None, "YEZIDI COMBINING HAMZA MARK", 0x21, "Yezidi"),
    c(0x10EAC, None, "YEZIDI COMBINING MADDA MARK", 0x21, "Yezidi"),
    c(0x10EAD, None, "YEZIDI HYPHENATION MARK", 0x00, "Yezidi"),
    c(0x10EB0, None, "YEZIDI LETTER LAM WITH DOT ABOVE", 0x31, "Yezidi"),
    c(0x10EB1, None, "YEZIDI LETTER YOT WITH CIRCUMFLEX ABOVE", 0x31, "Yezidi"),
    c(0x10F00, None, "OLD SOGDIAN LETTER ALEPH", 0x31, "Old_Sogdian"),
    c(0x10F01, None, "OLD SOGDIAN LETTER FINAL ALEPH", 0x31, "Old_Sogdian"),
    c(0x10F02, None, "OLD SOGDIAN LETTER BETH", 0x31, "Old_Sogdian"),
    c(0x10F03, None, "OLD SOGDIAN LETTER FINAL BETH", 0x31, "Old_Sogdian"),
    c(0x10F04, None, "OLD SOGDIAN LETTER GIMEL", 0x31, "Old_Sogdian"),
    c(0x10F05, None, "OLD SOGDIAN LETTER HE", 0x31, "Old_Sogdian"),
    c(0x10F06, None, "OLD SOGDIAN LETTER FINAL HE", 0x31, "Old_Sogdian"),
    c(0x10F07, None, "OLD SOGDIAN LETTER WAW", 0x31, "Old_Sogdian"),
    c(0x10F08, None, "OLD SOGDIAN LETTER ZAYIN", 0x31, "Old_Sogdian"),
    c(0x10F09, None, "OLD SOGDIAN LETTER HETH", 0x31, "Old_Sogdian"),
    c(0x10F0A, None, "OLD SOGDIAN LETTER YODH", 0x31, "Old_Sogdian"),
    c(0x10F0B, None, "OLD SOGDIAN LETTER KAPH", 0x31, "Old_Sogdian"),
    c(0x10F0C, None, "OLD SOGDIAN LETTER LAMEDH", 0x31, "Old_Sogdian"),
    c(0x10F0D, None, "OLD SOGDIAN LETTER MEM", 0x31, "Old_Sogdian"),
    c(0x10F0E, None, "OLD SOGDIAN LETTER NUN", 0x31, "Old_Sogdian"),
    c(0x10F0F, None, "OLD SOGDIAN LETTER FINAL NUN", 0x31, "Old_Sogdian"),
    c(0x10F10, None, "OLD SOGDIAN LETTER FINAL NUN WITH VERTICAL TAIL", 0x31, "Old_Sogdian"),
    c(0x10F11, None, "OLD SOGDIAN LETTER SAMEKH", 0x31, "Old_Sogdian"),
    c(0x10F12, None, "OLD SOGDIAN LETTER AYIN", 0x31, "Old_Sogdian"),
    c(0x10F13, None, "OLD SOGDIAN LETTER ALTERNATE AYIN", 0x31, "Old_Sogdian"),
    c(0x10F14, None, "OLD SOGDIAN LETTER PE", 0x31, "Old_Sogdian"),
    c(0x10F15, None, "OLD SOGDIAN LETTER SADHE", 0x31, "Old_Sogdian"),
    c(0x10F16, None, "OLD SOGDIAN LETTER FINAL SADHE", 0x31, "Old_Sogdian"),
    c(0x10F17, None, "OLD SOGDIAN LETTER FINAL SADHE WITH VERTICAL TAIL", 0x31, "Old_Sogdian"),
    c(0x10F18, None, "OLD SOGDIAN LETTER RESH-AYIN-DALETH", 0x31, "Old_Sogdian"),
    c(0x10F19, None, "OLD SOGDIAN LETTER SHIN", 0x31, "Old_Sogdian"),
    c(0x10F1A, None, "OLD SOGDIAN LETTER TAW", 0x31, "Old_Sogdian"),
    c(0x10F1B, None, "OLD SOGDIAN LETTER FINAL TAW", 0x31, "Old_Sogdian"),
    c(0x10F1C, None, "OLD SOGDIAN LETTER FINAL TAW WITH VERTICAL TAIL", 0x31, "Old_Sogdian"),
    c(0x10F1D, None, "OLD SOGDIAN NUMBER ONE", 0x00, "Old_Sogdian"),
    c(0x10F1E, None, "OLD SOGDIAN NUMBER TWO", 0x00, "Old_Sogdian"),
    c(0x10F1F, None, "OLD SOGDIAN NUMBER THREE", 0x00, "Old_Sogdian"),
    c(0x10F20, None, "OLD SOGDIAN NUMBER FOUR", 0x00, "Old_Sogdian"),
    c(0x10F21, None, "OLD SOGDIAN NUMBER FIVE", 0x00, "Old_Sogdian"),
    c(0x10F22, None, "OLD SOGDIAN NUMBER TEN", 0x00, "Old_Sogdian"),
    c(0x10F23, None, "OLD SOGDIAN NUMBER TWENTY", 0x00, "Old_Sogdian"),
    c(0x10F24, None, "OLD SOGDIAN NUMBER THIRTY", 0x00, "Old_Sogdian"),
    c(0x10F25, None, "OLD SOGDIAN NUMBER ONE HUNDRED", 0x00, "Old_Sogdian"),
    c(0x10F26, None, "OLD SOGDIAN FRACTION ONE HALF", 0x00, "Old_Sogdian"),
    c(0x10F27, None, "OLD SOGDIAN LIGATURE AYIN-DALETH", 0x31, "Old_Sogdian"),
    c(0x10F30, None, "SOGDIAN LETTER ALEPH", 0x31, "Sogdian"),
    c(0x10F31, None, "SOGDIAN LETTER BETH", 0x31, "Sogdian"),
    c(0x10F32, None, "SOGDIAN LETTER GIMEL", 0x31, "Sogdian"),
    c(0x10F33, None, "SOGDIAN LETTER HE", 0x31, "Sogdian"),
    c(0x10F34, None, "SOGDIAN LETTER WAW", 0x31, "Sogdian"),
    c(0x10F35, None, "SOGDIAN LETTER ZAYIN", 0x31, "Sogdian"),
    c(0x10F36, None, "SOGDIAN LETTER HETH", 0x31, "Sogdian"),
    c(0x10F37, None, "SOGDIAN LETTER YODH", 0x31, "Sogdian"),
    c(0x10F38, None, "SOGDIAN LETTER KAPH", 0x31, "Sogdian"),
    c(0x10F39, None, "SOGDIAN LETTER LAMEDH", 0x31, "Sogdian"),
    c(0x10F3A, None, "SOGDIAN LETTER MEM", 0x31, "Sogdian"),
    c(0x10F3B, None, "SOGDIAN LETTER NUN", 0x31, "Sogdian"),
    c(0x10F3C, None, "SOGDIAN LETTER SAMEKH", 0x31, "Sogdian"),
    c(0x10F3D, None, "SOGDIAN LETTER AYIN", 0x31, "Sogdian"),
    c(0x10F3E, None, "SOGDIAN LETTER PE", 0x31, "Sogdian"),
    c(0x10F3F, None, "SOGDIAN LETTER SADHE", 0x31, "Sogdian"),
    c(0x10F40, None, "SOGDIAN LETTER RESH-AYIN", 0x31, "Sogdian"),
    c(0x10F41, None, "SOGDIAN LETTER SHIN", 0x31, "Sogdian"),
    c(0x10F42, None, "SOGDIAN LETTER TAW", 0x31, "Sogdian"),
    c(0x10F43, None, "SOGDIAN LETTER FETH", 0x31, "Sogdian"),
    c(0x10F44, None, "SOGDIAN LETTER LESH", 0x31, "Sogdian"),
    c(0x10F45, None, "SOGDIAN INDEPENDENT SHIN", 0x31, "Sogdian"),
    c(0x10F46, None, "SOGDIAN COMBINING DOT BELOW", 0x20, "Sogdian"),
    c(0x10F47, None, "SOGDIAN COMBINING TWO DOTS BELOW", 0x20, "Sogdian"),
    c(0x10F48, None, "SOGDIAN COMBINING DOT ABOVE", 0x20, "Sogdian"),
    c(0x10F49, None, "SOGDIAN COMBINING TWO DOTS ABOVE", 0x20, "Sogdian"),
    c(0x10F4A, None, "SOGDIAN COMBINING CURVE ABOVE", 0x20, "Sogdian"),
    c(0x10F4B, None, "SOGDIAN COMBINING CURVE BELOW", 0x20, "Sogdian"),
    c(0x10F4C, None, "SOGDIAN COMBINING HOOK ABOVE", 0x20, "Sogdian"),
    c(0x10F4D, None, "SOGDIAN COMBINING HOOK BELOW", 0x20, "Sogdian"),
    c(0x10F4E, None, "SOGDIAN COMBINING LONG HOOK BELOW", 0x20, "Sogdian"),
    c(0x10F4F, None, "SOGDIAN COMBINING RESH BELOW", 0x20, "Sogdian"),
    c(0x10F50, None, "SOGDIAN COMBINING STROKE BELOW", 0x20, "Sogdian"),
    c(0x10F51, None, "SOGDIAN NUMBER ONE", 0x00, "Sogdian"),
    c(0x10F52, None, "SOGDIAN NUMBER TEN", 0x00, "Sogdian"),
    c(0x10F53, None, "SOGDIAN NUMBER TWENTY", 0x00, "Sogdian"),
    c(0x10F54, None, "SOGDIAN NUMBER ONE HUNDRED", 0x00, "Sogdian"),
    c(0x10F55, None, "SOGDIAN PUNCTUATION TWO VERTICAL BARS", 0x00, "Sogdian"),
    c(0x10F56, None, "SOGDIAN PUNCTUATION TWO VERTICAL BARS WITH DOTS", 0x00, "Sogdian"),
    c(0x10F57, None, "SOGDIAN PUNCTUATION CIRCLE WITH DOT", 0x00, "Sogdian"),
    c(0x10F58, None, "SOGDIAN PUNCTUATION TWO CIRCLES WITH DOTS", 0x00, "Sogdian"),
    c(0x10F59, None, "SOGDIAN PUNCTUATION HALF CIRCLE WITH DOT", 0x00, "Sogdian"),
    c(0x10F70, None, "OLD UYGHUR LETTER ALEPH", 0x31, "Old_Uyghur"),
    c(0x10F71, None, "OLD UYGHUR LETTER BETH", 0x31, "Old_Uyghur"),
    c(0x10F72, None, "OLD UYGHUR LETTER GIMEL-HETH", 0x31, "Old_Uyghur"),
    c(0x10F73, None, "OLD UYGHUR LETTER WAW", 0x31, "Old_Uyghur"),
    c(0x10F74, None, "OLD UYGHUR LETTER ZAYIN", 0x31, "Old_Uyghur"),
    c(0x10F75, None, "OLD UYGHUR LETTER FINAL HETH", 0x31, "Old_Uyghur"),
    c(0x10F76, None, "OLD UYGHUR LETTER YODH", 0x31, "Old_Uyghur"),
    c(0x10F77, None, "OLD UYGHUR LETTER KAPH", 0x31, "Old_Uyghur"),
    c(0x10F78, None, "OLD UYGHUR LETTER LAMEDH", 0x31, "Old_Uyghur"),
    c(0x10F79, None, "OLD UYGHUR LETTER MEM", 0x31, "Old_Uyghur"),
    c(0x10F7A, None, "OLD UYGHUR LETTER NUN", 0x31, "Old_Uyghur"),
    c(0x10F7B, None, "OLD UYGHUR LETTER SAMEKH", 0x31, "Old_Uyghur"),
    c(0x10F7C, None, "OLD UYGHUR LETTER PE", 0x31, "Old_Uyghur"),
    c(0x10F7D, None, "OLD UYGHUR LETTER SADHE", 0x31, "Old_Uyghur"),
    c(0x10F7E, None, "OLD UYGHUR LETTER RESH", 0x31, "Old_Uyghur"),
    c(0x10F7F, None, "OLD UYGHUR LETTER SHIN", 0x31, "Old_Uyghur"),
    c(0x10F80, None, "OLD UYGHUR LETTER TAW", 0x31, "Old_Uyghur"),
    c(0x10F81, None, "OLD UYGHUR LETTER LESH", 0x31, "Old_Uyghur"),
    c(0x10F82, None, "OLD UYGHUR COMBINING DOT ABOVE", 0x20, "Old_Uyghur"),
    c(0x10F83, None, "OLD UYGHUR COMBINING DOT BELOW", 0x20, "Old_Uyghur"),
    c(0x10F84, None, "OLD UYGHUR COMBINING TWO DOTS ABOVE", 0x20, "Old_Uyghur"),
    c(0x10F85, None, "OLD UYGHUR COMBINING TWO DOTS BELOW", 0x20, "Old_Uyghur"),
    c(0x10F86, None, "OLD UYGHUR PUNCTUATION BAR", 0x00, "Old_Uyghur"),
    c(0x10F87, None, "OLD UYGHUR PUNCTUATION TWO BARS", 0x00, "Old_Uyghur"),
    c(0x10F88, None, "OLD UYGHUR PUNCTUATION TWO DOTS", 0x00, "Old_Uyghur"),
    c(0x10F89, None, "OLD UYGHUR PUNCTUATION FOUR DOTS", 0x00, "Old_Uyghur"),
    c(0x10FB0, None, "CHORASMIAN LETTER ALEPH", 0x31, "Chorasmian"),
    c(0x10FB1, None, "CHORASMIAN LETTER SMALL ALEPH", 0x31, "Chorasmian"),
    c(0x10FB2, None, "CHORASMIAN LETTER BETH", 0x31, "Chorasmian"),
    c(0x10FB3, None, "CHORASMIAN LETTER GIMEL", 0x31, "Chorasmian"),
    c(0x10FB4, None, "CHORASMIAN LETTER DALETH", 0x31, "Chorasmian"),
    c(0x10FB5, None, "CHORASMIAN LETTER HE", 0x31, "Chorasmian"),
    c(0x10FB6, None, "CHORASMIAN LETTER WAW", 0x31, "Chorasmian"),
    c(0x10FB7, None, "CHORASMIAN LETTER CURLED WAW", 0x31, "Chorasmian"),
    c(0x10FB8, None, "CHORASMIAN LETTER ZAYIN", 0x31, "Chorasmian"),
    c(0x10FB9, None, "CHORASMIAN LETTER HETH", 0x31, "Chorasmian"),
    c(0x10FBA, None, "CHORASMIAN LETTER YODH", 0x31, "Chorasmian"),
    c(0x10FBB, None, "CHORASMIAN LETTER KAPH", 0x31, "Chorasmian"),
    c(0x10FBC, None, "CHORASMIAN LETTER LAMEDH", 0x31, "Chorasmian"),
    c(0x10FBD, None, "CHORASMIAN LETTER MEM", 0x31, "Chorasmian"),
    c(0x10FBE, None, "CHORASMIAN LETTER NUN", 0x31, "Chorasmian"),
    c(0x10FBF, None, "CHORASMIAN LETTER SAMEKH", 0x31, "Chorasmian"),
    c(0x10FC0, None, "CHORASMIAN LETTER AYIN", 0x31, "Chorasmian"),
    c(0x10FC1, None, "CHORASMIAN LETTER PE", 0x31, "Chorasmian"),
    c(0x10FC2, None, "CHORASMIAN LETTER RESH", 0x31, "Chorasmian"),
    c(0x10FC3, None, "CHORASMIAN LETTER SHIN", 0x31, "Chorasmian"),
    c(0x10FC4, None, "CHORASMIAN LETTER TAW", 0x31, "Chorasmian"),
    c(0x10FC5, None, "CHORASMIAN NUMBER ONE", 0x00, "Chorasmian"),
    c(0x10FC6, None, "CHORASMIAN NUMBER TWO", 0x00, "Chorasmian"),
    c(0x10FC7, None, "CHORASMIAN NUMBER THREE", 0x00, "Chorasmian"),
    c(0x10FC8, None, "CHORASMIAN NUMBER FOUR", 0x00, "Chorasmian"),
    c(0x10FC9, None, "CHORASMIAN NUMBER TEN", 0x00, "Chorasmian"),
    c(0x10FCA, None, "CHORASMIAN NUMBER TWENTY", 0x00, "Chorasmian"),
    c(0x10FCB, None, "CHORASMIAN NUMBER ONE HUNDRED", 0x00, "Chorasmian"),
    c(0x10FE0, None, "ELYMAIC LETTER ALEPH", 0x31, "Elymaic"),
    c(0x10FE1, None, "ELYMAIC LETTER BETH", 0x31, "Elymaic"),
    c(0x10FE2, None, "ELYMAIC LETTER GIMEL", 0x31, "Elymaic"),
    c(0x10FE3, None, "ELYMAIC LETTER DALETH", 0x31, "Elymaic"),
    c(0x10FE4, None, "ELYMAIC LETTER HE", 0x31, "Elymaic"),
    c(0x10FE5, None, "ELYMAIC LETTER WAW", 0x31, "Elymaic"),
    c(0x10FE6, None, "ELYMAIC LETTER ZAYIN", 0x31, "Elymaic"),
    c(0x10FE7, None, "ELYMAIC LETTER HETH", 0x31, "Elymaic"),
    c(0x10FE8, None, "ELYMAIC LETTER TETH", 0x31, "Elymaic"),
    c(0x10FE9, None, "ELYMAIC LETTER YODH", 0x31, "Elymaic"),
    c(0x10FEA, None, "ELYMAIC LETTER KAPH", 0x31, "Elymaic"),
    c(0x10FEB, None, "ELYMAIC LETTER LAMEDH", 0x31, "Elymaic"),
    c(0x10FEC, None, "ELYMAIC LETTER MEM", 0x31, "Elymaic"),
    c(0x10FED, None, "ELYMAIC LETTER NUN", 0x31, "Elymaic"),
    c(0x10FEE, None, "ELYMAIC LETTER SAMEKH", 0x31, "Elymaic"),
    c(0x10FEF, None, "ELYMAIC LETTER AYIN", 0x31, "Elymaic"),
    c(0x10FF0, None, "ELYMAIC LETTER PE", 0x31, "Elymaic"),
    c(0x10FF1, None, "ELYMAIC LETTER SADHE", 0x31, "Elymaic"),
    c(0x10FF2, None, "ELYMAIC LETTER QOPH", 0x31, "Elymaic"),
    c(0x10FF3, None, "ELYMAIC LETTER RESH", 0x31, "Elymaic"),
    c(0x10FF4, None, "ELYMAIC LETTER SHIN", 0x31, "Elymaic"),
    c(0x10FF5, None, "ELYMAIC LETTER TAW", 0x31, "Elymaic"),
    c(0x10FF6, None, "ELYMAIC LIGATURE ZAYIN-YODH", 0x31, "Elymaic"),
    c(0x11000, None, "BRAHMI SIGN CANDRABINDU", 0x21, "Brahmi"),
    c(0x11001, None, "BRAHMI SIGN ANUSVARA", 0x21, "Brahmi"),
    c(0x11002, None, "BRAHMI SIGN VISARGA", 0x21, "Brahmi"),
    c(0x11003, None, "BRAHMI SIGN JIHVAMULIYA", 0x31, "Brahmi"),
    c(0x11004, None, "BRAHMI SIGN UPADHMANIYA", 0x31, "Brahmi"),
    c(0x11005, None, "BRAHMI LETTER A", 0x31, "Brahmi"),
    c(0x11006, None, "BRAHMI LETTER AA", 0x31, "Brahmi"),
    c(0x11007, None, "BRAHMI LETTER I", 0x31, "Brahmi"),
    c(0x11008, None, "BRAHMI LETTER II", 0x31, "Brahmi"),
    c(0x11009, None, "BRAHMI LETTER U", 0x31, "Brahmi"),
    c(0x1100A, None, "BRAHMI LETTER UU", 0x31, "Brahmi"),
    c(0x1100B, None, "BRAHMI LETTER VOCALIC R", 0x31, "Brahmi"),
    c(0x1100C, None, "BRAHMI LETTER VOCALIC RR", 0x31, "Brahmi"),
    c(0x1100D, None, "BRAHMI LETTER VOCALIC L", 0x31, "Brahmi"),
    c(0x1100E, None, "BRAHMI LETTER VOCALIC LL", 0x31, "Brahmi"),
    c(0x1100F, None, "BRAHMI LETTER E", 0x31, "Brahmi"),
    c(0x11010, None, "BRAHMI LETTER AI", 0x31, "Brahmi"),
    c(0x11011, None, "BRAHMI LETTER O", 0x31, "Brahmi"),
    c(0x11012, None, "BRAHMI LETTER AU", 0x31, "Brahmi"),
    c(0x11013, None, "BRAHMI LETTER KA", 0x31, "Brahmi"),
    c(0x11014, None, "BRAHMI LETTER KHA", 0x31, "Brahmi"),
    c(0x11015, None, "BRAHMI LETTER GA", 0x31, "Brahmi"),
    c(0x11016, None, "BRAHMI LETTER GHA", 0x31, "Brahmi"),
    c(0x11017, None, "BRAHMI LETTER NGA", 0x31, "Brahmi"),
    c(0x11018, None, "BRAHMI LETTER CA", 0x31, "Brahmi"),
    c(0x11019, None, "BRAHMI LETTER CHA", 0x31, "Brahmi"),
    c(0x1101A, None, "BRAHMI LETTER JA", 0x31, "Brahmi"),
    c(0x1101B, None, "BRAHMI LETTER JHA", 0x31, "Brahmi"),
    c(0x1101C, None, "BRAHMI LETTER NYA", 0x31, "Brahmi"),
    c(0x1101D, None, "BRAHMI LETTER TTA", 0x31, "Brahmi"),
    c(0x1101E, None, "BRAHMI LETTER TTHA", 0x31, "Brahmi"),
    c(0x1101F, None, "BRAHMI LETTER DDA", 0x31, "Brahmi"),
    c(0x11020, None, "BRAHMI LETTER DDHA", 0x31, "Brahmi"),
    c(0x11021, None, "BRAHMI LETTER NNA", 0x31, "Brahmi"),
    c(0x11022, None, "BRAHMI LETTER TA", 0x31, "Brahmi"),
    c(0x11023, None, "BRAHMI LETTER THA", 0x31, "Brahmi"),
    c(0x11024, None, "BRAHMI LETTER DA", 0x31, "Brahmi"),
    c(0x11025, None, "BRAHMI LETTER DHA", 0x31, "Brahmi"),
    c(0x11026, None, "BRAHMI LETTER NA", 0x31, "Brahmi"),
    c(0x11027, None, "BRAHMI LETTER PA", 0x31, "Brahmi"),
    c(0x11028, None, "BRAHMI LETTER PHA", 0x31, "Brahmi"),
    c(0x11029, None, "BRAHMI LETTER BA", 0x31, "Brahmi"),
    c(0x1102A, None, "BRAHMI LETTER BHA", 0x31, "Brahmi"),
    c(0x1102B, None, "BRAHMI LETTER MA", 0x31, "Brahmi"),
    c(0x1102C, None, "BRAHMI LETTER YA", 0x31, "Brahmi"),
    c(0x1102D, None, "BRAHMI LETTER RA", 0x31, "Brahmi"),
    c(0x1102E, None, "BRAHMI LETTER LA", 0x31, "Brahmi"),
    c(0x1102F, None, "BRAHMI LETTER VA", 0x31, "Brahmi"),
    c(0x11030, None, "BRAHMI LETTER SHA", 0x31, "Brahmi"),
    c(0x11031, None, "BRAHMI LETTER SSA", 0x31, "Brahmi"),
    c(0x11032, None, "BRAHMI LETTER SA", 0x31, "Brahmi"),
    c(0x11033, None, "BRAHMI LETTER HA", 0x31, "Brahmi"),
    c(0x11034, None, "BRAHMI LETTER LLA", 0x31, "Brahmi"),
    c(0x11035, None, "BRAHMI LETTER OLD TAMIL LLLA", 0x31, "Brahmi"),
    c(0x11036, None, "BRAHMI LETTER OLD TAMIL RRA", 0x31, "Brahmi"),
    c(0x11037, None, "BRAHMI LETTER OLD TAMIL NNNA", 0x31, "Brahmi"),
    c(0x11038, None, "BRAHMI VOWEL SIGN AA", 0x21, "Brahmi"),
    c(0x11039, None, "BRAHMI VOWEL SIGN BHATTIPROLU AA", 0x21, "Brahmi"),
    c(0x1103A, None, "BRAHMI VOWEL SIGN I", 0x21, "Brahmi"),
    c(0x1103B, None, "BRAHMI VOWEL SIGN II", 0x21, "Brahmi"),
    c(0x1103C, None, "BRAHMI VOWEL SIGN U", 0x21, "Brahmi"),
    c(0x1103D, None, "BRAHMI VOWEL SIGN UU", 0x21, "Brahmi"),
    c(0x1103E, None, "BRAHMI VOWEL SIGN VOCALIC R", 0x21, "Brahmi"),
    c(0x1103F, None, "BRAHMI VOWEL SIGN VOCALIC RR", 0x21, "Brahmi"),
    c(0x11040, None, "BRAHMI VOWEL SIGN VOCALIC L", 0x21, "Brahmi"),
    c(0x11041, None, "BRAHMI VOWEL SIGN VOCALIC LL", 0x21, "Brahmi"),
    c(0x11042, None, "BRAHMI VOWEL SIGN E", 0x21, "Brahmi"),
    c(0x11043, None, "BRAHMI VOWEL SIGN AI", 0x21, "Brahmi"),
    c(0x11044, None, "BRAHMI VOWEL SIGN O", 0x21, "Brahmi"),
    c(0x11045, None, "BRAHMI VOWEL SIGN AU", 0x21, "Brahmi"),
    c(0x11046, None, "BRAHMI VIRAMA", 0x20, "Brahmi"),
    c(0x11047, None, "BRAHMI DANDA", 0x00, "Brahmi"),
    c(0x11048, None, "BRAHMI DOUBLE DANDA", 0x00, "Brahmi"),
    c(0x11049, None, "BRAHMI PUNCTUATION DOT", 0x00, "Brahmi"),
    c(0x1104A, None, "BRAHMI PUNCTUATION DOUBLE DOT", 0x00, "Brahmi"),
    c(0x1104B, None, "BRAHMI PUNCTUATION LINE", 0x00, "Brahmi"),
    c(0x1104C, None, "BRAHMI PUNCTUATION CRESCENT BAR", 0x00, "Brahmi"),
    c(0x1104D, None, "BRAHMI PUNCTUATION LOTUS", 0x00, "Brahmi"),
    c(0x11052, None, "BRAHMI NUMBER ONE", 0x00, "Brahmi"),
    c(0x11053, None, "BRAHMI NUMBER TWO", 0x00, "Brahmi"),
    c(0x11054, None, "BRAHMI NUMBER THREE", 0x00, "Brahmi"),
    c(0x11055, None, "BRAHMI NUMBER FOUR", 0x00, "Brahmi"),
    c(0x11056, None, "BRAHMI NUMBER FIVE", 0x00, "Brahmi"),
    c(0x11057, None, "BRAHMI NUMBER SIX", 0x00, "Brahmi"),
    c(0x11058, None, "BRAHMI NUMBER SEVEN", 0x00, "Brahmi"),
    c(0x11059, None, "BRAHMI NUMBER EIGHT", 0x00, "Brahmi"),
    c(0x1105A, None, "BRAHMI NUMBER NINE", 0x00, "Brahmi"),
    c(0x1105B, None, "BRAHMI NUMBER TEN", 0x00, "Brahmi"),
    c(0x1105C, None, "BRAHMI NUMBER TWENTY", 0x00, "Brahmi"),
    c(0x1105D, None, "BRAHMI NUMBER THIRTY", 0x00, "Brahmi"),
    c(0x1105E, None, "BRAHMI NUMBER FORTY", 0x00, "Brahmi"),
    c(0x1105F, None, "BRAHMI NUMBER FIFTY", 0x00, "Brahmi"),
    c(0x11060, None, "BRAHMI NUMBER SIXTY", 0x00, "Brahmi"),
    c(0x11061, None, "BRAHMI NUMBER SEVENTY", 0x00, "Brahmi"),
    c(0x11062, None, "BRAHMI NUMBER EIGHTY", 0x00, "Brahmi"),
    c(0x11063, None, "BRAHMI NUMBER NINETY", 0x00, "Brahmi"),
    c(0x11064, None, "BRAHMI NUMBER ONE HUNDRED", 0x00, "Brahmi"),
    c(0x11065, None, "BRAHMI NUMBER ONE THOUSAND", 0x00, "Brahmi"),
    c(0x11066, None, "BRAHMI DIGIT ZERO", 0x20, "Brahmi"),
    c(0x11067, None, "BRAHMI DIGIT ONE", 0x20, "Brahmi"),
    c(0x11068, None, "BRAHMI DIGIT TWO", 0x20, "Brahmi"),
    c(0x11069, None, "BRAHMI DIGIT THREE", 0x20, "Brahmi"),
    c(0x1106A, None, "BRAHMI DIGIT FOUR", 0x20, "Brahmi"),
    c(0x1106B, None, "BRAHMI DIGIT FIVE", 0x20, "Brahmi"),
    c(0x1106C, None, "BRAHMI DIGIT SIX", 0x20, "Brahmi"),
    c(0x1106D, None, "BRAHMI DIGIT SEVEN", 0x20, "Brahmi"),
    c(0x1106E, None, "BRAHMI DIGIT EIGHT", 0x20, "Brahmi"),
    c(0x1106F, None, "BRAHMI DIGIT NINE", 0x20, "Brahmi"),
    c(0x11070, None, "BRAHMI SIGN OLD TAMIL VIRAMA", 0x20, "Brahmi"),
    c(0x11071, None, "BRAHMI LETTER OLD TAMIL SHORT E", 0x31, "Brahmi"),
    c(0x11072, None, "BRAHMI LETTER OLD TAMIL SHORT O", 0x31, "Brahmi"),
    c(0x11073, None, "BRAHMI VOWEL SIGN OLD TAMIL SHORT E", 0x21, "Brahmi"),
    c(0x11074, None, "BRAHMI VOWEL SIGN OLD TAMIL SHORT O", 0x21, "Brahmi"),
    c(0x11075, None, "BRAHMI LETTER OLD TAMIL LLA", 0x31, "Brahmi"),
    c(0x1107F, None, "BRAHMI NUMBER JOINER", 0x20, "Brahmi"),
    c(0x11080, None, "KAITHI SIGN CANDRABINDU", 0x20, "Kaithi"),
    c(0x11081, None, "KAITHI SIGN ANUSVARA", 0x20, "Kaithi"),
    c(0x11082, None, "KAITHI SIGN VISARGA", 0x21, "Kaithi"),
    c(0x11083, None, "KAITHI LETTER A", 0x31, "Kaithi"),
    c(0x11084, None, "KAITHI LETTER AA", 0x31, "Kaithi"),
    c(0x11085, None, "KAITHI LETTER I", 0x31, "Kaithi"),
    c(0x11086, None, "KAITHI LETTER II", 0x31, "Kaithi"),
    c(0x11087, None, "KAITHI LETTER U", 0x31, "Kaithi"),
    c(0x11088, None, "KAITHI LETTER UU", 0x31, "Kaithi"),
    c(0x11089, None, "KAITHI LETTER E", 0x31, "Kaithi"),
    c(0x1108A, None, "KAITHI LETTER AI", 0x31, "Kaithi"),
    c(0x1108B, None, "KAITHI LETTER O", 0x31, "Kaithi"),
    c(0x1108C, None, "KAITHI LETTER AU", 0x31, "Kaithi"),
    c(0x1108D, None, "KAITHI LETTER KA", 0x31, "Kaithi"),
    c(0x1108E, None, "KAITHI LETTER KHA", 0x31, "Kaithi"),
    c(0x1108F, None, "KAITHI LETTER GA", 0x31, "Kaithi"),
    c(0x11090, None, "KAITHI LETTER GHA", 0x31, "Kaithi"),
    c(0x11091, None, "KAITHI LETTER NGA", 0x31, "Kaithi"),
    c(0x11092, None, "KAITHI LETTER CA", 0x31, "Kaithi"),
    c(0x11093, None, "KAITHI LETTER CHA", 0x31, "Kaithi"),
    c(0x11094, None, "KAITHI LETTER JA", 0x31, "Kaithi"),
    c(0x11095, None, "KAITHI LETTER JHA", 0x31, "Kaithi"),
    c(0x11096, None, "KAITHI LETTER NYA", 0x31, "Kaithi"),
    c(0x11097, None, "KAITHI LETTER TTA", 0x31, "Kaithi"),
    c(0x11098, None, "KAITHI LETTER TTHA", 0x31, "Kaithi"),
    c(0x11099, None, "KAITHI LETTER DDA", 0x31, "Kaithi"),
    c(0x1109A, None, "KAITHI LETTER DDDHA", 0x31, "Kaithi"),
    c(0x1109B, None, "KAITHI LETTER DDHA", 0x31, "Kaithi"),
    c(0x1109C, None, "KAITHI LETTER RHA", 0x31, "Kaithi"),
    c(0x1109D, None, "KAITHI LETTER NNA", 0x31, "Kaithi"),
    c(0x1109E, None, "KAITHI LETTER TA", 0x31, "Kaithi"),
    c(0x1109F, None, "KAITHI LETTER THA", 0x31, "Kaithi"),
    c(0x110A0, None, "KAITHI LETTER DA", 0x31, "Kaithi"),
    c(0x110A1, None, "KAITHI LETTER DHA", 0x31, "Kaithi"),
    c(0x110A2, None, "KAITHI LETTER NA", 0x31, "Kaithi"),
    c(0x110A3, None, "KAITHI LETTER PA", 0x31, "Kaithi"),
    c(0x110A4, None, "KAITHI LETTER PHA", 0x31, "Kaithi"),
    c(0x110A5, None, "KAITHI LETTER BA", 0x31, "Kaithi"),
    c(0x110A6, None, "KAITHI LETTER BHA", 0x31, "Kaithi"),
    c(0x110A7, None, "KAITHI LETTER MA", 0x31, "Kaithi"),
    c(0x110A8, None, "KAITHI LETTER YA", 0x31, "Kaithi"),
    c(0x110A9, None, "KAITHI LETTER RA", 0x31, "Kaithi"),
    c(0x110AA, None, "KAITHI LETTER LA", 0x31, "Kaithi"),
    c(0x110AB, None, "KAITHI LETTER VA", 0x31, "Kaithi"),
    c(0x110AC, None, "KAITHI LETTER SHA", 0x31, "Kaithi"),
    c(0x110AD, None, "KAITHI LETTER SSA", 0x31, "Kaithi"),
    c(0x110AE, None, "KAITHI LETTER SA", 0x31, "Kaithi"),
    c(0x110AF, None, "KAITHI LETTER HA", 0x31, "Kaithi"),
    c(0x110B0, None, "KAITHI VOWEL SIGN AA", 0x21, "Kaithi"),
    c(0x110B1, None, "KAITHI VOWEL SIGN I", 0x21, "Kaithi"),
    c(0x110B2, None, "KAITHI VOWEL SIGN II", 0x21, "Kaithi"),
    c(0x110B3, None, "KAITHI VOWEL SIGN U", 0x21, "Kaithi"),
    c(0x110B4, None, "KAITHI VOWEL SIGN UU", 0x21, "Kaithi"),
    c(0x110B5, None, "KAITHI VOWEL SIGN E", 0x21, "Kaithi"),
    c(0x110B6, None, "KAITHI VOWEL SIGN AI", 0x21, "Kaithi"),
    c(0x110B7, None, "KAITHI VOWEL SIGN O", 0x21, "Kaithi"),
    c(0x110B8, None, "KAITHI VOWEL SIGN AU", 0x21, "Kaithi"),
    c(0x110B9, None, "KAITHI SIGN VIRAMA", 0x20, "Kaithi"),
    c(0x110BA, None, "KAITHI SIGN NUKTA", 0x20, "Kaithi"),
    c(0x110BB, None, "KAITHI ABBREVIATION SIGN", 0x00, "Kaithi"),
    c(0x110BC, None, "KAITHI ENUMERATION SIGN", 0x00, "Kaithi"),
    c(0x110BD, None, "KAITHI NUMBER SIGN", 0x00, "Kaithi"),
    c(0x110BE, None, "KAITHI SECTION MARK", 0x00, "Kaithi"),
    c(0x110BF, None, "KAITHI DOUBLE SECTION MARK", 0x00, "Kaithi"),
    c(0x110C0, None, "KAITHI DANDA", 0x00, "Kaithi"),
    c(0x110C1, None, "KAITHI DOUBLE DANDA", 0x00, "Kaithi"),
    c(0x110C2, None, "KAITHI VOWEL SIGN VOCALIC R", 0x21, "Kaithi"),
    c(0x110CD, None, "KAITHI NUMBER SIGN ABOVE", 0x00, "Kaithi"),
    c(0x110D0, None, "SORA SOMPENG LETTER SAH", 0x31, "Sora_Sompeng"),
    c(0x110D1, None, "SORA SOMPENG LETTER TAH", 0x31, "Sora_Sompeng"),
    c(0x110D2, None, "SORA SOMPENG LETTER BAH", 0x31, "Sora_Sompeng"),
    c(0x110D3, None, "SORA SOMPENG LETTER CAH", 0x31, "Sora_Sompeng"),
    c(0x110D4, None, "SORA SOMPENG LETTER DAH", 0x31, "Sora_Sompeng"),
    c(0x110D5, None, "SORA SOMPENG LETTER GAH", 0x31, "Sora_Sompeng"),
    c(0x110D6, None, "SORA SOMPENG LETTER MAH", 0x31, "Sora_Sompeng"),
    c(0x110D7, None, "SORA SOMPENG LETTER NGAH", 0x31, "Sora_Sompeng"),
    c(0x110D8, None, "SORA SOMPENG LETTER LAH", 0x31, "Sora_Sompeng"),
    c(0x110D9, None, "SORA SOMPENG LETTER NAH", 0x31, "Sora_Sompeng"),
    c(0x110DA, None, "SORA SOMPENG LETTER VAH", 0x31, "Sora_Sompeng"),
    c(0x110DB, None, "SORA SOMPENG LETTER PAH", 0x31, "Sora_Sompeng"),
    c(0x110DC, None, "SORA SOMPENG LETTER YAH", 0x31, "Sora_Sompeng"),
    c(0x110DD, None, "SORA SOMPENG LETTER RAH", 0x31, "Sora_Sompeng"),
    c(0x110DE, None, "SORA SOMPENG LETTER HAH", 0x31, "Sora_Sompeng"),
    c(0x110DF, None, "SORA SOMPENG LETTER KAH", 0x31, "Sora_Sompeng"),
    c(0x110E0, None, "SORA SOMPENG LETTER JAH", 0x31, "Sora_Sompeng"),
    c(0x110E1, None, "SORA SOMPENG LETTER NYAH", 0x31, "Sora_Sompeng"),
    c(0x110E2, None, "SORA SOMPENG LETTER AH", 0x31, "Sora_Sompeng"),
    c(0x110E3, None, "SORA SOMPENG LETTER EEH", 0x31, "Sora_Sompeng"),
    c(0x110E4, None, "SORA SOMPENG LETTER IH", 0x31, "Sora_Sompeng"),
    c(0x110E5, None, "SORA SOMPENG LETTER UH", 0x31, "Sora_Sompeng"),
    c(0x110E6, None, "SORA SOMPENG LETTER OH", 0x31, "Sora_Sompeng"),
    c(0x110E7, None, "SORA SOMPENG LETTER EH", 0x31, "Sora_Sompeng"),
    c(0x110E8, None, "SORA SOMPENG LETTER MAE", 0x31, "Sora_Sompeng"),
    c(0x110F0, None, "SORA SOMPENG DIGIT ZERO", 0x20, "Sora_Sompeng"),
    c(0x110F1, None, "SORA SOMPENG DIGIT ONE", 0x20, "Sora_Sompeng"),
    c(0x110F2, None, "SORA SOMPENG DIGIT TWO", 0x20, "Sora_Sompeng"),
    c(0x110F3, None, "SORA SOMPENG DIGIT THREE", 0x20, "Sora_Sompeng"),
    c(0x110F4, None, "SORA SOMPENG DIGIT FOUR", 0x20, "Sora_Sompeng"),
    c(0x110F5, None, "SORA SOMPENG DIGIT FIVE", 0x20, "Sora_Sompeng"),
    c(0x110F6, None, "SORA SOMPENG DIGIT SIX", 0x20, "Sora_Sompeng"),
    c(0x110F7, None, "SORA SOMPENG DIGIT SEVEN", 0x20, "Sora_Sompeng"),
    c(0x110F8, None, "SORA SOMPENG DIGIT EIGHT", 0x20, "Sora_Sompeng"),
    c(0x110F9, None, "SORA SOMPENG DIGIT NINE", 0x20, "Sora_Sompeng"),
    c(0x11100, None, "CHAKMA SIGN CANDRABINDU", 0x21, "Chakma"),
    c(0x11101, None, "CHAKMA SIGN ANUSVARA", 0x21, "Chakma"),
    c(0x11102, None, "CHAKMA SIGN VISARGA", 0x21, "Chakma"),
    c(0x11103, None, "CHAKMA LETTER AA", 0x31, "Chakma"),
    c(0x11104, None, "CHAKMA LETTER I", 0x31, "Chakma"),
    c(0x11105, None, "CHAKMA LETTER U", 0x31, "Chakma"),
    c(0x11106, None, "CHAKMA LETTER E", 0x31, "Chakma"),
    c(0x11107, None, "CHAKMA LETTER KAA", 0x31, "Chakma"),
    c(0x11108, None, "CHAKMA LETTER KHAA", 0x31, "Chakma"),
    c(0x11109, None, "CHAKMA LETTER GAA", 0x31, "Chakma"),
    c(0x1110A, None, "CHAKMA LETTER GHAA", 0x31, "Chakma"),
    c(0x1110B, None, "CHAKMA LETTER NGAA", 0x31, "Chakma"),
    c(0x1110C, None, "CHAKMA LETTER CAA", 0x31, "Chakma"),
    c(0x1110D, None, "CHAKMA LETTER CHAA", 0x31, "Chakma"),
    c(0x1110E, None, "CHAKMA LETTER JAA", 0x31, "Chakma"),
    c(0x1110F, None, "CHAKMA LETTER JHAA", 0x31, "Chakma"),
    c(0x11110, None, "CHAKMA LETTER NYAA", 0x31, "Chakma"),
    c(0x11111, None, "CHAKMA LETTER TTAA", 0x31, "Chakma"),
    c(0x11112, None, "CHAKMA LETTER TTHAA", 0x31, "Chakma"),
    c(0x11113, None, "CHAKMA LETTER DDAA", 0x31, "Chakma"),
    c(0x11114, None, "CHAKMA LETTER DDHAA", 0x31, "Chakma"),
    c(0x11115, None, "CHAKMA LETTER NNAA", 0x31, "Chakma"),
    c(0x11116, None, "CHAKMA LETTER TAA", 0x31, "Chakma"),
    c(0x11117, None, "CHAKMA LETTER THAA", 0x31, "Chakma"),
    c(0x11118, None, "CHAKMA LETTER DAA", 0x31, "Chakma"),
    c(0x11119, None, "CHAKMA LETTER DHAA", 0x31, "Chakma"),
    c(0x1111A, None, "CHAKMA LETTER NAA", 0x31, "Chakma"),
    c(0x1111B, None, "CHAKMA LETTER PAA", 0x31, "Chakma"),
    c(0x1111C, None, "CHAKMA LETTER PHAA", 0x31, "Chakma"),
    c(0x1111D, None, "CHAKMA LETTER BAA", 0x31, "Chakma"),
    c(0x1111E, None, "CHAKMA LETTER BHAA", 0x31, "Chakma"),
    c(0x1111F, None, "CHAKMA LETTER MAA", 0x31, "Chakma"),
    c(0x11120, None, "CHAKMA LETTER YYAA", 0x31, "Chakma"),
    c(0x11121, None, "CHAKMA LETTER YAA", 0x31, "Chakma"),
    c(0x11122, None, "CHAKMA LETTER RAA", 0x31, "Chakma"),
    c(0x11123, None, "CHAKMA LETTER LAA", 0x31, "Chakma"),
    c(0x11124, None, "CHAKMA LETTER WAA", 0x31, "Chakma"),
    c(0x11125, None, "CHAKMA LETTER SAA", 0x31, "Chakma"),
    c(0x11126, None, "CHAKMA LETTER HAA", 0x31, "Chakma"),
    c(0x11127, None, "CHAKMA VOWEL SIGN A", 0x21, "Chakma"),
    c(0x11128, None, "CHAKMA VOWEL SIGN I", 0x21, "Chakma"),
    c(0x11129, None, "CHAKMA VOWEL SIGN II", 0x21, "Chakma"),
    c(0x1112A, None, "CHAKMA VOWEL SIGN U", 0x21, "Chakma"),
    c(0x1112B, None, "CHAKMA VOWEL SIGN UU", 0x21, "Chakma"),
    c(0x1112C, None, "CHAKMA VOWEL SIGN E", 0x21, "Chakma"),
    c(0x1112D, None, "CHAKMA VOWEL SIGN AI", 0x21, "Chakma"),
    c(0x1112E, None, "CHAKMA VOWEL SIGN O", 0x21, "Chakma"),
    c(0x1112F, None, "CHAKMA VOWEL SIGN AU", 0x21, "Chakma"),
    c(0x11130, None, "CHAKMA VOWEL SIGN OI", 0x21, "Chakma"),
    c(0x11131, None, "CHAKMA O MARK", 0x21, "Chakma"),
    c(0x11132, None, "CHAKMA AU MARK", 0x21, "Chakma"),
    c(0x11133, None, "CHAKMA VIRAMA", 0x20, "Chakma"),
    c(0x11134, None, "CHAKMA MAAYYAA", 0x20, "Chakma"),
    c(0x11136, None, "CHAKMA DIGIT ZERO", 0x20, "Chakma"),
    c(0x11137, None, "CHAKMA DIGIT ONE", 0x20, "Chakma"),
    c(0x11138, None, "CHAKMA DIGIT TWO", 0x20, "Chakma"),
    c(0x11139, None, "CHAKMA DIGIT THREE", 0x20, "Chakma"),
    c(0x1113A, None, "CHAKMA DIGIT FOUR", 0x20, "Chakma"),
    c(0x1113B, None, "CHAKMA DIGIT FIVE", 0x20, "Chakma"),
    c(0x1113C, None, "CHAKMA DIGIT SIX", 0x20, "Chakma"),
    c(0x1113D, None, "CHAKMA DIGIT SEVEN", 0x20, "Chakma"),
    c(0x1113E, None, "CHAKMA DIGIT EIGHT", 0x20, "Chakma"),
    c(0x1113F, None, "CHAKMA DIGIT NINE", 0x20, "Chakma"),
    c(0x11140, None, "CHAKMA SECTION MARK", 0x00, "Chakma"),
    c(0x11141, None, "CHAKMA DANDA", 0x00, "Chakma"),
    c(0x11142, None, "CHAKMA DOUBLE DANDA", 0x00, "Chakma"),
    c(0x11143, None, "CHAKMA QUESTION MARK", 0x00, "Chakma"),
    c(0x11144, None, "CHAKMA LETTER LHAA", 0x31, "Chakma"),
    c(0x11145, None, "CHAKMA VOWEL SIGN AA", 0x21, "Chakma"),
    c(0x11146, None, "CHAKMA VOWEL SIGN EI", 0x21, "Chakma"),
    c(0x11147, None, "CHAKMA LETTER VAA", 0x31, "Chakma"),
    c(0x11150, None, "MAHAJANI LETTER A", 0x31, "Mahajani"),
    c(0x11151, None, "MAHAJANI LETTER I", 0x31, "Mahajani"),
    c(0x11152, None, "MAHAJANI LETTER U", 0x31, "Mahajani"),
    c(0x11153, None, "MAHAJANI LETTER E", 0x31, "Mahajani"),
    c(0x11154, None, "MAHAJANI LETTER O", 0x31, "Mahajani"),
    c(0x11155, None, "MAHAJANI LETTER KA", 0x31, "Mahajani"),
    c(0x11156, None, "MAHAJANI LETTER KHA", 0x31, "Mahajani"),
    c(0x11157, None, "MAHAJANI LETTER GA", 0x31, "Mahajani"),
    c(0x11158, None, "MAHAJANI LETTER GHA", 0x31, "Mahajani"),
    c(0x11159, None, "MAHAJANI LETTER CA", 0x31, "Mahajani"),
    c(0x1115A, None, "MAHAJANI LETTER CHA", 0x31, "Mahajani"),
    c(0x1115B, None, "MAHAJANI LETTER JA", 0x31, "Mahajani"),
    c(0x1115C, None, "MAHAJANI LETTER JHA", 0x31, "Mahajani"),
    c(0x1115D, None, "MAHAJANI LETTER NYA", 0x31, "Mahajani"),
    c(0x1115E, None, "MAHAJANI LETTER TTA", 0x31, "Mahajani"),
    c(0x1115F, None, "MAHAJANI LETTER TTHA", 0x31, "Mahajani"),
    c(0x11160, None, "MAHAJANI LETTER DDA", 0x31, "Mahajani"),
    c(0x11161, None, "MAHAJANI LETTER DDHA", 0x31, "Mahajani"),
    c(0x11162, None, "MAHAJANI LETTER NNA", 0x31, "Mahajani"),
    c(0x11163, None, "MAHAJANI LETTER TA", 0x31, "Mahajani"),
    c(0x11164, None, "MAHAJANI LETTER THA", 0x31, "Mahajani"),
    c(0x11165, None, "MAHAJANI LETTER DA", 0x31, "Mahajani"),
    c(0x11166, None, "MAHAJANI LETTER DHA", 0x31, "Mahajani"),
    c(0x11167, None, "MAHAJANI LETTER NA", 0x31, "Mahajani"),
    c(0x11168, None, "MAHAJANI LETTER PA", 0x31, "Mahajani"),
    c(0x11169, None, "MAHAJANI LETTER PHA", 0x31, "Mahajani"),
    c(0x1116A, None, "MAHAJANI LETTER BA", 0x31, "Mahajani"),
    c(0x1116B, None, "MAHAJANI LETTER BHA", 0x31, "Mahajani"),
    c(0x1116C, None, "MAHAJANI LETTER MA", 0x31, "Mahajani"),
    c(0x1116D, None, "MAHAJANI LETTER RA", 0x31, "Mahajani"),
    c(0x1116E, None, "MAHAJANI LETTER LA", 0x31, "Mahajani"),
    c(0x1116F, None, "MAHAJANI LETTER VA", 0x31, "Mahajani"),
    c(0x11170, None, "MAHAJANI LETTER SA", 0x31, "Mahajani"),
    c(0x11171, None, "MAHAJANI LETTER HA", 0x31, "Mahajani"),
    c(0x11172, None, "MAHAJANI LETTER RRA", 0x31, "Mahajani"),
    c(0x11173, None, "MAHAJANI SIGN NUKTA", 0x20, "Mahajani"),
    c(0x11174, None, "MAHAJANI ABBREVIATION SIGN", 0x00, "Mahajani"),
    c(0x11175, None, "MAHAJANI SECTION MARK", 0x00, "Mahajani"),
    c(0x11176, None, "MAHAJANI LIGATURE SHRI", 0x31, "Mahajani"),
    c(0x11180, None, "SHARADA SIGN CANDRABINDU", 0x21, "Sharada"),
    c(0x11181, None, "SHARADA SIGN ANUSVARA", 0x21, "Sharada"),
    c(0x11182, None, "SHARADA SIGN VISARGA", 0x21, "Sharada"),
    c(0x11183, None, "SHARADA LETTER A", 0x31, "Sharada"),
    c(0x11184, None, "SHARADA LETTER AA", 0x31, "Sharada"),
    c(0x11185, None, "SHARADA LETTER I", 0x31, "Sharada"),
    c(0x11186, None, "SHARADA LETTER II", 0x31, "Sharada"),
    c(0x11187, None, "SHARADA LETTER U", 0x31, "Sharada"),
    c(0x11188, None, "SHARADA LETTER UU", 0x31, "Sharada"),
    c(0x11189, None, "SHARADA LETTER VOCALIC R", 0x31, "Sharada"),
    c(0x1118A, None, "SHARADA LETTER VOCALIC RR", 0x31, "Sharada"),
    c(0x1118B, None, "SHARADA LETTER VOCALIC L", 0x31, "Sharada"),
    c(0x1118C, None, "SHARADA LETTER VOCALIC LL", 0x31, "Sharada"),
    c(0x1118D, None, "SHARADA LETTER E", 0x31, "Sharada"),
    c(0x1118E, None, "SHARADA LETTER AI", 0x31, "Sharada"),
    c(0x1118F, None, "SHARADA LETTER O", 0x31, "Sharada"),
    c(0x11190, None, "SHARADA LETTER AU", 0x31, "Sharada"),
    c(0x11191, None, "SHARADA LETTER KA", 0x31, "Sharada"),
    c(0x11192, None, "SHARADA LETTER KHA", 0x31, "Sharada"),
    c(0x11193, None, "SHARADA LETTER GA", 0x31, "Sharada"),
    c(0x11194, None, "SHARADA LETTER GHA", 0x31, "Sharada"),
    c(0x11195, None, "SHARADA LETTER NGA", 0x31, "Sharada"),
    c(0x11196, None, "SHARADA LETTER CA", 0x31, "Sharada"),
    c(0x11197, None, "SHARADA LETTER CHA", 0x31, "Sharada"),
    c(0x11198, None, "SHARADA LETTER JA", 0x31, "Sharada"),
    c(0x11199, None, "SHARADA LETTER JHA", 0x31, "Sharada"),
    c(0x1119A, None, "SHARADA LETTER NYA", 0x31, "Sharada"),
    c(0x1119B, None, "SHARADA LETTER TTA", 0x31, "Sharada"),
    c(0x1119C, None, "SHARADA LETTER TTHA", 0x31, "Sharada"),
    c(0x1119D, None, "SHARADA LETTER DDA", 0x31, "Sharada"),
    c(0x1119E, None, "SHARADA LETTER DDHA", 0x31, "Sharada"),
    c(0x1119F, None, "SHARADA LETTER NNA", 0x31, "Sharada"),
    c(0x111A0, None, "SHARADA LETTER TA", 0x31, "Sharada"),
    c(0x111A1, None, "SHARADA LETTER THA", 0x31, "Sharada"),
    c(0x111A2, None, "SHARADA LETTER DA", 0x31, "Sharada"),
    c(0x111A3, None, "SHARADA LETTER DHA", 0x31, "Sharada"),
    c(0x111A4, None, "SHARADA LETTER NA", 0x31, "Sharada"),
    c(0x111A5, None, "SHARADA LETTER PA", 0x31, "Sharada"),
    c(0x111A6, None, "SHARADA LETTER PHA", 0x31, "Sharada"),
    c(0x111A7, None, "SHARADA LETTER BA", 0x31, "Sharada"),
    c(0x111A8, None, "SHARADA LETTER BHA", 0x31, "Sharada"),
    c(0x111A9, None, "SHARADA LETTER MA", 0x31, "Sharada"),
    c(0x111AA, None, "SHARADA LETTER YA", 0x31, "Sharada"),
    c(0x111AB, None, "SHARADA LETTER RA", 0x31, "Sharada"),
    c(0x111AC, None, "SHARADA LETTER LA", 0x31, "Sharada"),
    c(0x111AD, None, "SHARADA LETTER LLA", 0x31, "Sharada"),
    c(0x111AE, None, "SHARADA LETTER VA", 0x31, "Sharada"),
    c(0x111AF, None, "SHARADA LETTER SHA", 0x31, "Sharada"),
    c(0x111B0, None, "SHARADA LETTER SSA", 0x31, "Sharada"),
    c(0x111B1, None, "SHARADA LETTER SA", 0x31, "Sharada"),
    c(0x111B2, None, "SHARADA LETTER HA", 0x31, "Sharada"),
    c(0x111B3, None, "SHARADA VOWEL SIGN AA", 0x21, "Sharada"),
    c(0x111B4, None, "SHARADA VOWEL SIGN I", 0x21, "Sharada"),
    c(0x111B5, None, "SHARADA VOWEL SIGN II", 0x21, "Sharada"),
    c(0x111B6, None, "SHARADA VOWEL SIGN U", 0x21, "Sharada"),
    c(0x111B7, None, "SHARADA VOWEL SIGN UU", 0x21, "Sharada"),
    c(0x111B8, None, "SHARADA VOWEL SIGN VOCALIC R", 0x21, "Sharada"),
    c(0x111B9, None, "SHARADA VOWEL SIGN VOCALIC RR", 0x21, "Sharada"),
    c(0x111BA, None, "SHARADA VOWEL SIGN VOCALIC L", 0x21, "Sharada"),
    c(0x111BB, None, "SHARADA VOWEL SIGN VOCALIC LL", 0x21, "Sharada"),
    c(0x111BC, None, "SHARADA VOWEL SIGN E", 0x21, "Sharada"),
    c(0x111BD, None, "SHARADA VOWEL SIGN AI", 0x21, "Sharada"),
    c(0x111BE, None, "SHARADA VOWEL SIGN O", 0x21, "Sharada"),
    c(0x111BF, None, "SHARADA VOWEL SIGN AU", 0x21, "Sharada"),
    c(0x111C0, None, "SHARADA SIGN VIRAMA", 0x20, "Sharada"),
    c(0x111C1, None, "SHARADA SIGN AVAGRAHA", 0x31, "Sharada"),
    c(0x111C2, None, "SHARADA SIGN JIHVAMULIYA", 0x31, "Sharada"),
    c(0x111C3, None, "SHARADA SIGN UPADHMANIYA", 0x31, "Sharada"),
    c(0x111C4, None, "SHARADA OM", 0x31, "Sharada"),
    c(0x111C5, None, "SHARADA DANDA", 0x00, "Sharada"),
    c(0x111C6, None, "SHARADA DOUBLE DANDA", 0x00, "Sharada"),
    c(0x111C7, None, "SHARADA ABBREVIATION SIGN", 0x00, "Sharada"),
    c(0x111C8, None, "SHARADA SEPARATOR", 0x00, "Sharada"),
    c(0x111C9, None, "SHARADA SANDHI MARK", 0x20, "Sharada"),
    c(0x111CA, None, "SHARADA SIGN NUKTA", 0x20, "Sharada"),
    c(0x111CB, None, "SHARADA VOWEL MODIFIER MARK", 0x20, "Sharada"),
    c(0x111CC, None, "SHARADA EXTRA SHORT VOWEL MARK", 0x20, "Sharada"),
    c(0x111CD, None, "SHARADA SUTRA MARK", 0x00, "Sharada"),
    c(0x111CE, None, "SHARADA VOWEL SIGN PRISHTHAMATRA E", 0x21, "Sharada"),
    c(0x111CF, None, "SHARADA SIGN INVERTED CANDRABINDU", 0x21, "Sharada"),
    c(0x111D0, None, "SHARADA DIGIT ZERO", 0x20, "Sharada"),
    c(0x111D1, None, "SHARADA DIGIT ONE", 0x20, "Sharada"),
    c(0x111D2, None, "SHARADA DIGIT TWO", 0x20, "Sharada"),
    c(0x111D3, None, "SHARADA DIGIT THREE", 0x20, "Sharada"),
    c(0x111D4, None, "SHARADA DIGIT FOUR", 0x20, "Sharada"),
    c(0x111D5, None, "SHARADA DIGIT FIVE", 0x20, "Sharada"),
    c(0x111D6, None, "SHARADA DIGIT SIX", 0x20, "Sharada"),
    c(0x111D7, None, "SHARADA DIGIT SEVEN", 0x20, "Sharada"),
    c(0x111D8, None, "SHARADA DIGIT EIGHT", 0x20, "Sharada"),
    c(0x111D9, None, "SHARADA DIGIT NINE", 0x20, "Sharada"),
    c(0x111DA, None, "SHARADA EKAM", 0x31, "Sharada"),
    c(0x111DB, None, "SHARADA SIGN SIDDHAM", 0x00, "Sharada"),
    c(0x111DC, None, "SHARADA HEADSTROKE", 0x31, "Sharada"),
    c(0x111DD, None, "SHARADA CONTINUATION SIGN", 0x00, "Sharada"),
    c(0x111DE, None, "SHARADA SECTION MARK-1", 0x00, "Sharada"),
    c(0x111DF, None, "SHARADA SECTION MARK-2", 0x00, "Sharada"),
    c(0x111E1, None, "SINHALA ARCHAIC DIGIT ONE", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x111E2, None, "SINHALA ARCHAIC DIGIT TWO", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x111E3, None, "SINHALA ARCHAIC DIGIT THREE", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x111E4, None, "SINHALA ARCHAIC DIGIT FOUR", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x111E5, None, "SINHALA ARCHAIC DIGIT FIVE", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x111E6, None, "SINHALA ARCHAIC DIGIT SIX", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x111E7, None, "SINHALA ARCHAIC DIGIT SEVEN", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x111E8, None, "SINHALA ARCHAIC DIGIT EIGHT", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x111E9, None, "SINHALA ARCHAIC DIGIT NINE", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x111EA, None, "SINHALA ARCHAIC NUMBER TEN", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x111EB, None, "SINHALA ARCHAIC NUMBER TWENTY", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x111EC, None, "SINHALA ARCHAIC NUMBER THIRTY", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x111ED, None, "SINHALA ARCHAIC NUMBER FORTY", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x111EE, None, "SINHALA ARCHAIC NUMBER FIFTY", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x111EF, None, "SINHALA ARCHAIC NUMBER SIXTY", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x111F0, None, "SINHALA ARCHAIC NUMBER SEVENTY", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x111F1, None, "SINHALA ARCHAIC NUMBER EIGHTY", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x111F2, None, "SINHALA ARCHAIC NUMBER NINETY", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x111F3, None, "SINHALA ARCHAIC NUMBER ONE HUNDRED", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x111F4, None, "SINHALA ARCHAIC NUMBER ONE THOUSAND", 0x00, "Sinhala_Archaic_Numbers"),
    c(0x11200, None, "KHOJKI LETTER A", 0x31, "Khojki"),
    c(0x11201, None, "KHOJKI LETTER AA", 0x31, "Khojki"),
    c(0x11202, None, "KHOJKI LETTER I", 0x31, "Khojki"),
    c(0x11203, None, "KHOJKI LETTER U", 0x31, "Khojki"),
    c(0x11204, None, "KHOJKI LETTER E", 0x31, "Khojki"),
    c(0x11205, None, "KHOJKI LETTER AI", 0x31, "Khojki"),
    c(0x11206, None, "KHOJKI LETTER O", 0x31, "Khojki"),
    c(0x11207, None, "KHOJKI LETTER AU", 0x31, "Khojki"),
    c(0x11208, None, "KHOJKI LETTER KA", 0x31, "Khojki"),
    c(0x11209, None, "KHOJKI LETTER KHA", 0x31, "Khojki"),
    c(0x1120A, None, "KHOJKI LETTER GA", 0x31, "Khojki"),
    c(0x1120B, None, "KHOJKI LETTER GGA", 0x31, "Khojki"),
    c(0x1120C, None, "KHOJKI LETTER GHA", 0x31, "Khojki"),
    c(0x1120D, None, "KHOJKI LETTER NGA", 0x31, "Khojki"),
    c(0x1120E, None, "KHOJKI LETTER CA", 0x31, "Khojki"),
    c(0x1120F, None, "KHOJKI LETTER CHA", 0x31, "Khojki"),
    c(0x11210, None, "KHOJKI LETTER JA", 0x31, "Khojki"),
    c(0x11211, None, "KHOJKI LETTER JJA", 0x31, "Khojki"),
    c(0x11213, None, "KHOJKI LETTER NYA", 0x31, "Khojki"),
    c(0x11214, None, "KHOJKI LETTER TTA", 0x31, "Khojki"),
    c(0x11215, None, "KHOJKI LETTER TTHA", 0x31, "Khojki"),
    c(0x11216, None, "KHOJKI LETTER DDA", 0x31, "Khojki"),
    c(0x11217, None, "KHOJKI LETTER DDHA", 0x31, "Khojki"),
    c(0x11218, None, "KHOJKI LETTER NNA", 0x31, "Khojki"),
    c(0x11219, None, "KHOJKI LETTER TA", 0x31, "Khojki"),
    c(0x1121A, None, "KHOJKI LETTER THA", 0x31, "Khojki"),
    c(0x1121B, None, "KHOJKI LETTER DA", 0x31, "Khojki"),
    c(0x1121C, None, "KHOJKI LETTER DDDA", 0x31, "Khojki"),
    c(0x1121D, None, "KHOJKI LETTER DHA", 0x31, "Khojki"),
    c(0x1121E, None, "KHOJKI LETTER NA", 0x31, "Khojki"),
    c(0x1121F, None, "KHOJKI LETTER PA", 0x31, "Khojki"),
    c(0x11220, None, "KHOJKI LETTER PHA", 0x31, "Khojki"),
    c(0x11221, None, "KHOJKI LETTER BA", 0x31, "Khojki"),
    c(0x11222, None, "KHOJKI LETTER BBA", 0x31, "Khojki"),
    c(0x11223, None, "KHOJKI LETTER BHA", 0x31, "Khojki"),
    c(0x11224, None, "KHOJKI LETTER MA", 0x31, "Khojki"),
    c(0x11225, None, "KHOJKI LETTER YA", 0x31, "Khojki"),
    c(0x11226, None, "KHOJKI LETTER RA", 0x31, "Khojki"),
    c(0x11227, None, "KHOJKI LETTER LA", 0x31, "Khojki"),
    c(0x11228, None, "KHOJKI LETTER VA", 0x31, "Khojki"),
    c(0x11229, None, "KHOJKI LETTER SA", 0x31, "Khojki"),
    c(0x1122A, None, "KHOJKI LETTER HA", 0x31, "Khojki"),
    c(0x1122B, None, "KHOJKI LETTER LLA", 0x31, "Khojki"),
    c(0x1122C, None, "KHOJKI VOWEL SIGN AA", 0x21, "Khojki"),
    c(0x1122D, None, "KHOJKI VOWEL SIGN I", 0x21, "Khojki"),
    c(0x1122E, None, "KHOJKI VOWEL SIGN II", 0x21, "Khojki"),
    c(0x1122F, None, "KHOJKI VOWEL SIGN U", 0x21, "Khojki"),
    c(0x11230, None, "KHOJKI VOWEL SIGN E", 0x21, "Khojki"),
    c(0x11231, None, "KHOJKI VOWEL SIGN AI", 0x21, "Khojki"),
    c(0x11232, None, "KHOJKI VOWEL SIGN O", 0x21, "Khojki"),
    c(0x11233, None, "KHOJKI VOWEL SIGN AU", 0x21, "Khojki"),
    c(0x11234, None, "KHOJKI SIGN ANUSVARA", 0x21, "Khojki"),
    c(0x11235, None, "KHOJKI SIGN VIRAMA", 0x20, "Khojki"),
    c(0x11236, None, "KHOJKI SIGN NUKTA", 0x20, "Khojki"),
    c(0x11237, None, "KHOJKI SIGN SHADDA", 0x21, "Khojki"),
    c(0x11238, None, "KHOJKI DANDA", 0x00, "Khojki"),
    c(0x11239, None, "KHOJKI DOUBLE DANDA", 0x00, "Khojki"),
    c(0x1123A, None, "KHOJKI WORD SEPARATOR", 0x00, "Khojki"),
    c(0x1123B, None, "KHOJKI SECTION MARK", 0x00, "Khojki"),
    c(0x1123C, None, "KHOJKI DOUBLE SECTION MARK", 0x00, "Khojki"),
    c(0x1123D, None, "KHOJKI ABBREVIATION SIGN", 0x00, "Khojki"),
    c(0x1123E, None, "KHOJKI SIGN SUKUN", 0x21, "Khojki"),
    c(0x11280, None, "MULTANI LETTER A", 0x31, "Multani"),
    c(0x11281, None, "MULTANI LETTER I", 0x31, "Multani"),
    c(0x11282, None, "MULTANI LETTER U", 0x31, "Multani"),
    c(0x11283, None, "MULTANI LETTER E", 0x31, "Multani"),
    c(0x11284, None, "MULTANI LETTER KA", 0x31, "Multani"),
    c(0x11285, None, "MULTANI LETTER KHA", 0x31, "Multani"),
    c(0x11286, None, "MULTANI LETTER GA", 0x31, "Multani"),
    c(0x11288, None, "MULTANI LETTER GHA", 0x31, "Multani"),
    c(0x1128A, None, "MULTANI LETTER CA", 0x31, "Multani"),
    c(0x1128B, None, "MULTANI LETTER CHA", 0x31, "Multani"),
    c(0x1128C, None, "MULTANI LETTER JA", 0x31, "Multani"),
    c(0x1128D, None, "MULTANI LETTER JJA", 0x31, "Multani"),
    c(0x1128F, None, "MULTANI LETTER NYA", 0x31, "Multani"),
    c(0x11290, None, "MULTANI LETTER TTA", 0x31, "Multani"),
    c(0x11291, None, "MULTANI LETTER TTHA", 0x31, "Multani"),
    c(0x11292, None, "MULTANI LETTER DDA", 0x31, "Multani"),
    c(0x11293, None, "MULTANI LETTER DDDA", 0x31, "Multani"),
    c(0x11294, None, "MULTANI LETTER DDHA", 0x31, "Multani"),
    c(0x11295, None, "MULTANI LETTER NNA", 0x31, "Multani"),
    c(0x11296, None, "MULTANI LETTER TA", 0x31, "Multani"),
    c(0x11297, None, "MULTANI LETTER THA", 0x31, "Multani"),
    c(0x11298, None, "MULTANI LETTER DA", 0x31, "Multani"),
    c(0x11299, None, "MULTANI LETTER DHA", 0x31, "Multani"),
    c(0x1129A, None, "MULTANI LETTER NA", 0x31, "Multani"),
    c(0x1129B, None, "MULTANI LETTER PA", 0x31, "Multani"),
    c(0x1129C, None, "MULTANI LETTER PHA", 0x31, "Multani"),
    c(0x1129D, None, "MULTANI LETTER BA", 0x31, "Multani"),
    c(0x1129F, None, "MULTANI LETTER BHA", 0x31, "Multani"),
    c(0x112A0, None, "MULTANI LETTER MA", 0x31, "Multani"),
    c(0x112A1, None, "MULTANI LETTER YA", 0x31, "Multani"),
    c(0x112A2, None, "MULTANI LETTER RA", 0x31, "Multani"),
    c(0x112A3, None, "MULTANI LETTER LA", 0x31, "Multani"),
    c(0x112A4, None, "MULTANI LETTER VA", 0x31, "Multani"),
    c(0x112A5, None, "MULTANI LETTER SA", 0x31, "Multani"),
    c(0x112A6, None, "MULTANI LETTER HA", 0x31, "Multani"),
    c(0x112A7, None, "MULTANI LETTER RRA", 0x31, "Multani"),
    c(0x112A8, None, "MULTANI LETTER RHA", 0x31, "Multani"),
    c(0x112A9, None, "MULTANI SECTION MARK", 0x00, "Multani"),
    c(0x112B0, None, "KHUDAWADI LETTER A", 0x31, "Khudawadi"),
    c(0x112B1, None, "KHUDAWADI LETTER AA", 0x31, "Khudawadi"),
    c(0x112B2, None, "KHUDAWADI LETTER I", 0x31, "Khudawadi"),
    c(0x112B3, None, "KHUDAWADI LETTER II", 0x31, "Khudawadi"),
    c(0x112B4, None, "KHUDAWADI LETTER U", 0x31, "Khudawadi"),
    c(0x112B5, None, "KHUDAWADI LETTER UU", 0x31, "Khudawadi"),
    c(0x112B6, None, "KHUDAWADI LETTER E", 0x31, "Khudawadi"),
    c(0x112B7, None, "KHUDAWADI LETTER AI", 0x31, "Khudawadi"),
    c(0x112B8, None, "KHUDAWADI LETTER O", 0x31, "Khudawadi"),
    c(0x112B9, None, "KHUDAWADI LETTER AU", 0x31, "Khudawadi"),
    c(0x112BA, None, "KHUDAWADI LETTER KA", 0x31, "Khudawadi"),
    c(0x112BB, None, "KHUDAWADI LETTER KHA", 0x31, "Khudawadi"),
    c(0x112BC, None, "KHUDAWADI LETTER GA", 0x31, "Khudawadi"),
    c(0x112BD, None, "KHUDAWADI LETTER GGA", 0x31, "Khudawadi"),
    c(0x112BE, None, "KHUDAWADI LETTER GHA", 0x31, "Khudawadi"),
    c(0x112BF, None, "KHUDAWADI LETTER NGA", 0x31, "Khudawadi"),
    c(0x112C0, None, "KHUDAWADI LETTER CA", 0x31, "Khudawadi"),
    c(0x112C1, None, "KHUDAWADI LETTER CHA", 0x31, "Khudawadi"),
    c(0x112C2, None, "KHUDAWADI LETTER JA", 0x31, "Khudawadi"),
    c(0x112C3, None, "KHUDAWADI LETTER JJA", 0x31, "Khudawadi"),
    c(0x112C4, None, "KHUDAWADI LETTER JHA", 0x31, "Khudawadi"),
    c(0x112C5, None, "KHUDAWADI LETTER NYA", 0x31, "Khudawadi"),
    c(0x112C6, None, "KHUDAWADI LETTER TTA", 0x31, "Khudawadi"),
    c(0x112C7, None, "KHUDAWADI LETTER TTHA", 0x31, "Khudawadi"),
    c(0x112C8, None, "KHUDAWADI LETTER DDA", 0x31, "Khudawadi"),
    c(0x112C9, None, "KHUDAWADI LETTER DDDA", 0x31, "Khudawadi"),
    c(0x112CA, None, "KHUDAWADI LETTER RRA", 0x31, "Khudawadi"),
    c(0x112CB, None, "KHUDAWADI LETTER DDHA", 0x31, "Khudawadi"),
    c(0x112CC, None, "KHUDAWADI LETTER NNA", 0x31, "Khudawadi"),
    c(0x112CD, None, "KHUDAWADI LETTER TA", 0x31, "Khudawadi"),
    c(0x112CE, None, "KHUDAWADI LETTER THA", 0x31, "Khudawadi"),
    c(0x112CF, None, "KHUDAWADI LETTER DA", 0x31, "Khudawadi"),
    c(0x112D0, None, "KHUDAWADI LETTER DHA", 0x31, "Khudawadi"),
    c(0x112D1, None, "KHUDAWADI LETTER NA", 0x31, "Khudawadi"),
    c(0x112D2, None, "KHUDAWADI LETTER PA", 0x31, "Khudawadi"),
    c(0x112D3, None, "KHUDAWADI LETTER PHA", 0x31, "Khudawadi"),
    c(0x112D4, None, "KHUDAWADI LETTER BA", 0x31, "Khudawadi"),
    c(0x112D5, None, "KHUDAWADI LETTER BBA", 0x31, "Khudawadi"),
    c(0x112D6, None, "KHUDAWADI LETTER BHA", 0x31, "Khudawadi"),
    c(0x112D7, None, "KHUDAWADI LETTER MA", 0x31, "Khudawadi"),
    c(0x112D8, None, "KHUDAWADI LETTER YA", 0x31, "Khudawadi"),
    c(0x112D9, None, "KHUDAWADI LETTER RA", 0x31, "Khudawadi"),
    c(0x112DA, None, "KHUDAWADI LETTER LA", 0x31, "Khudawadi"),
    c(0x112DB, None, "KHUDAWADI LETTER VA", 0x31, "Khudawadi"),
    c(0x112DC, None, "KHUDAWADI LETTER SHA", 0x31, "Khudawadi"),
    c(0x112DD, None, "KHUDAWADI LETTER SA", 0x31, "Khudawadi"),
    c(0x112DE, None, "KHUDAWADI LETTER HA", 0x31, "Khudawadi"),
    c(0x112DF, None, "KHUDAWADI SIGN ANUSVARA", 0x21, "Khudawadi"),
    c(0x112E0, None, "KHUDAWADI VOWEL SIGN AA", 0x21, "Khudawadi"),
    c(0x112E1, None, "KHUDAWADI VOWEL SIGN I", 0x21, "Khudawadi"),
    c(0x112E2, None, "KHUDAWADI VOWEL SIGN II", 0x21, "Khudawadi"),
    c(0x112E3, None, "KHUDAWADI VOWEL SIGN U", 0x21, "Khudawadi"),
    c(0x112E4, None, "KHUDAWADI VOWEL SIGN UU", 0x21, "Khudawadi"),
    c(0x112E5, None, "KHUDAWADI VOWEL SIGN E", 0x21, "Khudawadi"),
    c(0x112E6, None, "KHUDAWADI VOWEL SIGN AI", 0x21, "Khudawadi"),
    c(0x112E7, None, "KHUDAWADI VOWEL SIGN O", 0x21, "Khudawadi"),
    c(0x112E8, None, "KHUDAWADI VOWEL SIGN AU", 0x21, "Khudawadi"),
    c(0x112E9, None, "KHUDAWADI SIGN NUKTA", 0x20, "Khudawadi"),
    c(0x112EA, None, "KHUDAWADI SIGN VIRAMA", 0x20, "Khudawadi"),
    c(0x112F0, None, "KHUDAWADI DIGIT ZERO", 0x20, "Khudawadi"),
    c(0x112F1, None, "KHUDAWADI DIGIT ONE", 0x20, "Khudawadi"),
    c(0x112F2, None, "KHUDAWADI DIGIT TWO", 0x20, "Khudawadi"),
    c(0x112F3, None, "KHUDAWADI DIGIT THREE", 0x20, "Khudawadi"),
    c(0x112F4, None, "KHUDAWADI DIGIT FOUR", 0x20, "Khudawadi"),
    c(0x112F5, None, "KHUDAWADI DIGIT FIVE", 0x20, "Khudawadi"),
    c(0x112F6, None, "KHUDAWADI DIGIT SIX", 0x20, "Khudawadi"),
    c(0x112F7, None, "KHUDAWADI DIGIT SEVEN", 0x20, "Khudawadi"),
    c(0x112F8, None, "KHUDAWADI DIGIT EIGHT", 0x20, "Khudawadi"),
    c(0x112F9, None, "KHUDAWADI DIGIT NINE", 0x20, "Khudawadi"),
    c(0x11300, None, "GRANTHA SIGN COMBINING ANUSVARA ABOVE", 0x21, "Grantha"),
    c(0x11301, None, "GRANTHA SIGN CANDRABINDU", 0x21, "Grantha"),
    c(0x11302, None, "GRANTHA SIGN ANUSVARA", 0x21, "Grantha"),
    c(0x11303, None, "GRANTHA SIGN VISARGA", 0x21, "Grantha"),
    c(0x11305, None, "GRANTHA LETTER A", 0x31, "Grantha"),
    c(0x11306, None, "GRANTHA LETTER AA", 0x31, "Grantha"),
    c(0x11307, None, "GRANTHA LETTER I", 0x31, "Grantha"),
    c(0x11308, None, "GRANTHA LETTER II", 0x31, "Grantha"),
    c(0x11309, None, "GRANTHA LETTER U", 0x31, "Grantha"),
    c(0x1130A, None, "GRANTHA LETTER UU", 0x31, "Grantha"),
    c(0x1130B, None, "GRANTHA LETTER VOCALIC R", 0x31, "Grantha"),
    c(0x1130C, None, "GRANTHA LETTER VOCALIC L", 0x31, "Grantha"),
    c(0x1130F, None, "GRANTHA LETTER EE", 0x31, "Grantha"),
    c(0x11310, None, "GRANTHA LETTER AI", 0x31, "Grantha"),
    c(0x11313, None, "GRANTHA LETTER OO", 0x31, "Grantha"),
    c(0x11314, None, "GRANTHA LETTER AU", 0x31, "Grantha"),
    c(0x11315, None, "GRANTHA LETTER KA", 0x31, "Grantha"),
    c(0x11316, None, "GRANTHA LETTER KHA", 0x31, "Grantha"),
    c(0x11317, None, "GRANTHA LETTER GA", 0x31, "Grantha"),
    c(0x11318, None, "GRANTHA LETTER GHA", 0x31, "Grantha"),
    c(0x11319, None, "GRANTHA LETTER NGA", 0x31, "Grantha"),
    c(0x1131A, None, "GRANTHA LETTER CA", 0x31, "Grantha"),
    c(0x1131B, None, "GRANTHA LETTER CHA", 0x31, "Grantha"),
    c(0x1131C, None, "GRANTHA LETTER JA", 0x31, "Grantha"),
    c(0x1131D, None, "GRANTHA LETTER JHA", 0x31, "Grantha"),
    c(0x1131E, None, "GRANTHA LETTER NYA", 0x31, "Grantha"),
    c(0x1131F, None, "GRANTHA LETTER TTA", 0x31, "Grantha"),
    c(0x11320, None, "GRANTHA LETTER TTHA", 0x31, "Grantha"),
    c(0x11321, None, "GRANTHA LETTER DDA", 0x31, "Grantha"),
    c(0x11322, None, "GRANTHA LETTER DDHA", 0x31, "Grantha"),
    c(0x11323, None, "GRANTHA LETTER NNA", 0x31, "Grantha"),
    c(0x11324, None, "GRANTHA LETTER TA", 0x31, "Grantha"),
    c(0x11325, None, "GRANTHA LETTER THA", 0x31, "Grantha"),
    c(0x11326, None, "GRANTHA LETTER DA", 0x31, "Grantha"),
    c(0x11327, None, "GRANTHA LETTER DHA", 0x31, "Grantha"),
    c(0x11328, None, "GRANTHA LETTER NA", 0x31, "Grantha"),
    c(0x1132A, None, "GRANTHA LETTER PA", 0x31, "Grantha"),
    c(0x1132B, None, "GRANTHA LETTER PHA", 0x31, "Grantha"),
    c(0x1132C, None, "GRANTHA LETTER BA", 0x31, "Grantha"),
    c(0x1132D, None, "GRANTHA LETTER BHA", 0x31, "Grantha"),
    c(0x1132E, None, "GRANTHA LETTER MA", 0x31, "Grantha"),
    c(0x1132F, None, "GRANTHA LETTER YA", 0x31, "Grantha"),
    c(0x11330, None, "GRANTHA LETTER RA", 0x31, "Grantha"),
    c(0x11332, None, "GRANTHA LETTER LA", 0x31, "Grantha"),
    c(0x11333, None, "GRANTHA LETTER LLA", 0x31, "Grantha"),
    c(0x11335, None, "GRANTHA LETTER VA", 0x31, "Grantha"),
    c(0x11336, None, "GRANTHA LETTER SHA", 0x31, "Grantha"),
    c(0x11337, None, "GRANTHA LETTER SSA", 0x31, "Grantha"),
    c(0x11338, None, "GRANTHA LETTER SA", 0x31, "Grantha"),
    c(0x11339, None, "GRANTHA LETTER HA", 0x31, "Grantha"),
    c(0x1133B, None, "COMBINING BINDU BELOW", 0x20, "Grantha"),
    c(0x1133C, None, "GRANTHA SIGN NUKTA", 0x20, "Grantha"),
    c(0x1133D, None, "GRANTHA SIGN AVAGRAHA", 0x31, "Grantha"),
    c(0x1133E, None, "GRANTHA VOWEL SIGN AA", 0x21, "Grantha"),
    c(0x1133F, None, "GRANTHA VOWEL SIGN I", 0x21, "Grantha"),
    c(0x11340, None, "GRANTHA VOWEL SIGN II", 0x21, "Grantha"),
    c(0x11341, None, "GRANTHA VOWEL SIGN U", 0x21, "Grantha"),
    c(0x11342, None, "GRANTHA VOWEL SIGN UU", 0x21, "Grantha"),
    c(0x11343, None, "GRANTHA VOWEL SIGN VOCALIC R", 0x21, "Grantha"),
    c(0x11344, None, "GRANTHA VOWEL SIGN VOCALIC RR", 0x21, "Grantha"),
    c(0x11347, None, "GRANTHA VOWEL SIGN EE", 0x21, "Grantha"),
    c(0x11348, None, "GRANTHA VOWEL SIGN AI", 0x21, "Grantha"),
    c(0x1134B, None, "GRANTHA VOWEL SIGN OO", 0x21, "Grantha"),
    c(0x1134C, None, "GRANTHA VOWEL SIGN AU", 0x21, "Grantha"),
    c(0x1134D, None, "GRANTHA SIGN VIRAMA", 0x20, "Grantha"),
    c(0x11350, None, "GRANTHA OM", 0x31, "Grantha"),
    c(0x11357, None, "GRANTHA AU LENGTH MARK", 0x21, "Grantha"),
    c(0x1135D, None, "GRANTHA SIGN PLUTA", 0x31, "Grantha"),
    c(0x1135E, None, "GRANTHA LETTER VEDIC ANUSVARA", 0x31, "Grantha"),
    c(0x1135F, None, "GRANTHA LETTER VEDIC DOUBLE ANUSVARA", 0x31, "Grantha"),
    c(0x11360, None, "GRANTHA LETTER VOCALIC RR", 0x31, "Grantha"),
    c(0x11361, None, "GRANTHA LETTER VOCALIC LL", 0x31, "Grantha"),
    c(0x11362, None, "GRANTHA VOWEL SIGN VOCALIC L", 0x21, "Grantha"),
    c(0x11363, None, "GRANTHA VOWEL SIGN VOCALIC LL", 0x21, "Grantha"),
    c(0x11366, None, "COMBINING GRANTHA DIGIT ZERO", 0x20, "Grantha"),
    c(0x11367, None, "COMBINING GRANTHA DIGIT ONE", 0x20, "Grantha"),
    c(0x11368, None, "COMBINING GRANTHA DIGIT TWO", 0x20, "Grantha"),
    c(0x11369, None, "COMBINING GRANTHA DIGIT THREE", 0x20, "Grantha"),
    c(0x1136A, None, "COMBINING GRANTHA DIGIT FOUR", 0x20, "Grantha"),
    c(0x1136B, None, "COMBINING GRANTHA DIGIT FIVE", 0x20, "Grantha"),
    c(0x1136C, None, "COMBINING GRANTHA DIGIT SIX", 0x20, "Grantha"),
    c(0x11370, None, "COMBINING GRANTHA LETTER A", 0x20, "Grantha"),
    c(0x11371, None, "COMBINING GRANTHA LETTER KA", 0x20, "Grantha"),
    c(0x11372, None, "COMBINING GRANTHA LETTER NA", 0x20, "Grantha"),
    c(0x11373, None, "COMBINING GRANTHA LETTER VI", 0x20, "Grantha"),
    c(0x11374, None, "COMBINING GRANTHA LETTER PA", 0x20, "Grantha"),
    c(0x11400, None, "NEWA LETTER A", 0x31, "Newa"),
    c(0x11401, None, "NEWA LETTER AA", 0x31, "Newa"),
    c(0x11402, None, "NEWA LETTER I", 0x31, "Newa"),
    c(0x11403, None, "NEWA LETTER II", 0x31, "Newa"),
    c(0x11404, None, "NEWA LETTER U", 0x31, "Newa"),
    c(0x11405, None, "NEWA LETTER UU", 0x31, "Newa"),
    c(0x11406, None, "NEWA LETTER VOCALIC R", 0x31, "Newa"),
    c(0x11407, None, "NEWA LETTER VOCALIC RR", 0x31, "Newa"),
    c(0x11408, None, "NEWA LETTER VOCALIC L", 0x31, "Newa"),
    c(0x11409, None, "NEWA LETTER VOCALIC LL", 0x31, "Newa"),
    c(0x1140A, None, "NEWA LETTER E", 0x31, "Newa"),
    c(0x1140B, None, "NEWA LETTER AI", 0x31, "Newa"),
    c(0x1140C, None, "NEWA LETTER O", 0x31, "Newa"),
    c(0x1140D, None, "NEWA LETTER AU", 0x31, "Newa"),
    c(0x1140E, None, "NEWA LETTER KA", 0x31, "Newa"),
    c(0x1140F, None, "NEWA LETTER KHA", 0x31, "Newa"),
    c(0x11410, None, "NEWA LETTER GA", 0x31, "Newa"),
    c(0x11411, None, "NEWA LETTER GHA", 0x31, "Newa"),
    c(0x11412, None, "NEWA LETTER NGA", 0x31, "Newa"),
    c(0x11413, None, "NEWA LETTER NGHA", 0x31, "Newa"),
    c(0x11414, None, "NEWA LETTER CA", 0x31, "Newa"),
    c(0x11415, None, "NEWA LETTER CHA", 0x31, "Newa"),
    c(0x11416, None, "NEWA LETTER JA", 0x31, "Newa"),
    c(0x11417, None, "NEWA LETTER JHA", 0x31, "Newa"),
    c(0x11418, None, "NEWA LETTER NYA", 0x31, "Newa"),
    c(0x11419, None, "NEWA LETTER NYHA", 0x31, "Newa"),
    c(0x1141A, None, "NEWA LETTER TTA", 0x31, "Newa"),
    c(0x1141B, None, "NEWA LETTER TTHA", 0x31, "Newa"),
    c(0x1141C, None, "NEWA LETTER DDA", 0x31, "Newa"),
    c(0x1141D, None, "NEWA LETTER DDHA", 0x31, "Newa"),
    c(0x1141E, None, "NEWA LETTER NNA", 0x31, "Newa"),
    c(0x1141F, None, "NEWA LETTER TA", 0x31, "Newa"),
    c(0x11420, None, "NEWA LETTER THA", 0x31, "Newa"),
    c(0x11421, None, "NEWA LETTER DA", 0x31, "Newa"),
    c(0x11422, None, "NEWA LETTER DHA", 0x31, "Newa"),
    c(0x11423, None, "NEWA LETTER NA", 0x31, "Newa"),
    c(0x11424, None, "NEWA LETTER NHA", 0x31, "Newa"),
    c(0x11425, None, "NEWA LETTER PA", 0x31, "Newa"),
    c(0x11426, None, "NEWA LETTER PHA", 0x31, "Newa"),
    c(0x11427, None, "NEWA LETTER BA", 0x31, "Newa"),
    c(0x11428, None, "NEWA LETTER BHA", 0x31, "Newa"),
    c(0x11429, None, "NEWA LETTER MA", 0x31, "Newa"),
    c(0x1142A, None, "NEWA LETTER MHA", 0x31, "Newa"),
    c(0x1142B, None, "NEWA LETTER YA", 0x31, "Newa"),
    c(0x1142C, None, "NEWA LETTER RA", 0x31, "Newa"),
    c(0x1142D, None, "NEWA LETTER RHA", 0x31, "Newa"),
    c(0x1142E, None, "NEWA LETTER LA", 0x31, "Newa"),
    c(0x1142F, None, "NEWA LETTER LHA", 0x31, "Newa"),
    c(0x11430, None, "NEWA LETTER WA", 0x31, "Newa"),
    c(0x11431, None, "NEWA LETTER SHA", 0x31, "Newa"),
    c(0x11432, None, "NEWA LETTER SSA", 0x31, "Newa"),
    c(0x11433, None, "NEWA LETTER SA", 0x31, "Newa"),
    c(0x11434, None, "NEWA LETTER HA", 0x31, "Newa"),
    c(0x11435, None, "NEWA VOWEL SIGN AA", 0x21, "Newa"),
    c(0x11436, None, "NEWA VOWEL SIGN I", 0x21, "Newa"),
    c(0x11437, None, "NEWA VOWEL SIGN II", 0x21, "Newa"),
    c(0x11438, None, "NEWA VOWEL SIGN U", 0x21, "Newa"),
    c(0x11439, None, "NEWA VOWEL SIGN UU", 0x21, "Newa"),
    c(0x1143A, None, "NEWA VOWEL SIGN VOCALIC R", 0x21, "Newa"),
    c(0x1143B, None, "NEWA VOWEL SIGN VOCALIC RR", 0x21, "Newa"),
    c(0x1143C, None, "NEWA VOWEL SIGN VOCALIC L", 0x21, "Newa"),
    c(0x1143D, None, "NEWA VOWEL SIGN VOCALIC LL", 0x21, "Newa"),
    c(0x1143E, None, "NEWA VOWEL SIGN E", 0x21, "Newa"),
    c(0x1143F, None, "NEWA VOWEL SIGN AI", 0x21, "Newa"),
    c(0x11440, None, "NEWA VOWEL SIGN O", 0x21, "Newa"),
    c(0x11441, None, "NEWA VOWEL SIGN AU", 0x21, "Newa"),
    c(0x11442, None, "NEWA SIGN VIRAMA", 0x20, "Newa"),
    c(0x11443, None, "NEWA SIGN CANDRABINDU", 0x21, "Newa"),
    c(0x11444, None, "NEWA SIGN ANUSVARA", 0x21, "Newa"),
    c(0x11445, None, "NEWA SIGN VISARGA", 0x21, "Newa"),
    c(0x11446, None, "NEWA SIGN NUKTA", 0x20, "Newa"),
    c(0x11447, None, "NEWA SIGN AVAGRAHA", 0x31, "Newa"),
    c(0x11448, None, "NEWA SIGN FINAL ANUSVARA", 0x31, "Newa"),
    c(0x11449, None, "NEWA OM", 0x31, "Newa"),
    c(0x1144A, None, "NEWA SIDDHI", 0x31, "Newa"),
    c(0x1144B, None, "NEWA DANDA", 0x00, "Newa"),
    c(0x1144C, None, "NEWA DOUBLE DANDA", 0x00, "Newa"),
    c(0x1144D, None, "NEWA COMMA", 0x00, "Newa"),
    c(0x1144E, None, "NEWA GAP FILLER", 0x00, "Newa"),
    c(0x1144F, None, "NEWA ABBREVIATION SIGN", 0x00, "Newa"),
    c(0x11450, None, "NEWA DIGIT ZERO", 0x20, "Newa"),
    c(0x11451, None, "NEWA DIGIT ONE", 0x20, "Newa"),
    c(0x11452, None, "NEWA DIGIT TWO", 0x20, "Newa"),
    c(0x11453, None, "NEWA DIGIT THREE", 0x20, "Newa"),
    c(0x11454, None, "NEWA DIGIT FOUR", 0x20, "Newa"),
    c(0x11455, None, "NEWA DIGIT FIVE", 0x20, "Newa"),
    c(0x11456, None, "NEWA DIGIT SIX", 0x20, "Newa"),
    c(0x11457, None, "NEWA DIGIT SEVEN", 0x20, "Newa"),
    c(0x11458, None, "NEWA DIGIT EIGHT", 0x20, "Newa"),
    c(0x11459, None, "NEWA DIGIT NINE", 0x20, "Newa"),
    c(0x1145A, None, "NEWA DOUBLE COMMA", 0x00, "Newa"),
    c(0x1145B, None, "NEWA PLACEHOLDER MARK", 0x00, "Newa"),
    c(0x1145D, None, "NEWA INSERTION SIGN", 0x00, "Newa"),
    c(0x1145E, None, "NEWA SANDHI MARK", 0x20, "Newa"),
    c(0x1145F, None, "NEWA LETTER VEDIC ANUSVARA", 0x31, "Newa"),
    c(0x11460, None, "NEWA SIGN JIHVAMULIYA", 0x31, "Newa"),
    c(0x11461, None, "NEWA SIGN UPADHMANIYA", 0x31, "Newa"),
    c(0x11480, None, "TIRHUTA ANJI", 0x31, "Tirhuta"),
    c(0x11481, None, "TIRHUTA LETTER A", 0x31, "Tirhuta"),
    c(0x11482, None, "TIRHUTA LETTER AA", 0x31, "Tirhuta"),
    c(0x11483, None, "TIRHUTA LETTER I", 0x31, "Tirhuta"),
    c(0x11484, None, "TIRHUTA LETTER II", 0x31, "Tirhuta"),
    c(0x11485, None, "TIRHUTA LETTER U", 0x31, "Tirhuta"),
    c(0x11486, None, "TIRHUTA LETTER UU", 0x31, "Tirhuta"),
    c(0x11487, None, "TIRHUTA LETTER VOCALIC R", 0x31, "Tirhuta"),
    c(0x11488, None, "TIRHUTA LETTER VOCALIC RR", 0x31, "Tirhuta"),
    c(0x11489, None, "TIRHUTA LETTER VOCALIC L", 0x31, "Tirhuta"),
    c(0x1148A, None, "TIRHUTA LETTER VOCALIC LL", 0x31, "Tirhuta"),
    c(0x1148B, None, "TIRHUTA LETTER E", 0x31, "Tirhuta"),
    c(0x1148C, None, "TIRHUTA LETTER AI", 0x31, "Tirhuta"),
    c(0x1148D, None, "TIRHUTA LETTER O", 0x31, "Tirhuta"),
    c(0x1148E, None, "TIRHUTA LETTER AU", 0x31, "Tirhuta"),
    c(0x1148F, None, "TIRHUTA LETTER KA", 0x31, "Tirhuta"),
    c(0x11490, None, "TIRHUTA LETTER KHA", 0x31, "Tirhuta"),
    c(0x11491, None, "TIRHUTA LETTER GA", 0x31, "Tirhuta"),
    c(0x11492, None, "TIRHUTA LETTER GHA", 0x31, "Tirhuta"),
    c(0x11493, None, "TIRHUTA LETTER NGA", 0x31, "Tirhuta"),
    c(0x11494, None, "TIRHUTA LETTER CA", 0x31, "Tirhuta"),
    c(0x11495, None, "TIRHUTA LETTER CHA", 0x31, "Tirhuta"),
    c(0x11496, None, "TIRHUTA LETTER JA", 0x31, "Tirhuta"),
    c(0x11497, None, "TIRHUTA LETTER JHA", 0x31, "Tirhuta"),
    c(0x11498, None, "TIRHUTA LETTER NYA", 0x31, "Tirhuta"),
    c(0x11499, None, "TIRHUTA LETTER TTA", 0x31, "Tirhuta"),
    c(0x1149A, None, "TIRHUTA LETTER TTHA", 0x31, "Tirhuta"),
    c(0x1149B, None, "TIRHUTA LETTER DDA", 0x31, "Tirhuta"),
    c(0x1149C, None, "TIRHUTA LETTER DDHA", 0x31, "Tirhuta"),
    c(0x1149D, None, "TIRHUTA LETTER NNA", 0x31, "Tirhuta"),
    c(0x1149E, None, "TIRHUTA LETTER TA", 0x31, "Tirhuta"),
    c(0x1149F, None, "TIRHUTA LETTER THA", 0x31, "Tirhuta"),
    c(0x114A0, None, "TIRHUTA LETTER DA", 0x31, "Tirhuta"),
    c(0x114A1, None, "TIRHUTA LETTER DHA", 0x31, "Tirhuta"),
    c(0x114A2, None, "TIRHUTA LETTER NA", 0x31, "Tirhuta"),
    c(0x114A3, None, "TIRHUTA LETTER PA", 0x31, "Tirhuta"),
    c(0x114A4, None, "TIRHUTA LETTER PHA", 0x31, "Tirhuta"),
    c(0x114A5, None, "TIRHUTA LETTER BA", 0x31, "Tirhuta"),
    c(0x114A6, None, "TIRHUTA LETTER BHA", 0x31, "Tirhuta"),
    c(0x114A7, None, "TIRHUTA LETTER MA", 0x31, "Tirhuta"),
    c(0x114A8, None, "TIRHUTA LETTER YA", 0x31, "Tirhuta"),
    c(0x114A9, None, "TIRHUTA LETTER RA", 0x31, "Tirhuta"),
    c(0x114AA, None, "TIRHUTA LETTER LA", 0x31, "Tirhuta"),
    c(0x114AB, None, "TIRHUTA LETTER VA", 0x31, "Tirhuta"),
    c(0x114AC, None, "TIRHUTA LETTER SHA", 0x31, "Tirhuta"),
    c(0x114AD, None, "TIRHUTA LETTER SSA", 0x31, "Tirhuta"),
    c(0x114AE, None, "TIRHUTA LETTER SA", 0x31, "Tirhuta"),
    c(0x114AF, None, "TIRHUTA LETTER HA", 0x31, "Tirhuta"),
    c(0x114B0, None, "TIRHUTA VOWEL SIGN AA", 0x21, "Tirhuta"),
    c(0x114B1, None, "TIRHUTA VOWEL SIGN I", 0x21, "Tirhuta"),
    c(0x114B2, None, "TIRHUTA VOWEL SIGN II", 0x21, "Tirhuta"),
    c(0x114B3, None, "TIRHUTA VOWEL SIGN U", 0x21, "Tirhuta"),
    c(0x114B4, None, "TIRHUTA VOWEL SIGN UU", 0x21, "Tirhuta"),
    c(0x114B5, None, "TIRHUTA VOWEL SIGN VOCALIC R", 0x21, "Tirhuta"),
    c(0x114B6, None, "TIRHUTA VOWEL SIGN VOCALIC RR", 0x21, "Tirhuta"),
    c(0x114B7, None, "TIRHUTA VOWEL SIGN VOCALIC L", 0x21, "Tirhuta"),
    c(0x114B8, None, "TIRHUTA VOWEL SIGN VOCALIC LL", 0x21, "Tirhuta"),
    c(0x114B9, None, "TIRHUTA VOWEL SIGN E", 0x21, "Tirhuta"),
    c(0x114BA, None, "TIRHUTA VOWEL SIGN SHORT E", 0x21, "Tirhuta"),
    c(0x114BB, None, "TIRHUTA VOWEL SIGN AI", 0x21, "Tirhuta"),
    c(0x114BC, None, "TIRHUTA VOWEL SIGN O", 0x21, "Tirhuta"),
    c(0x114BD, None, "TIRHUTA VOWEL SIGN SHORT O", 0x21, "Tirhuta"),
    c(0x114BE, None, "TIRHUTA VOWEL SIGN AU", 0x21, "Tirhuta"),
    c(0x114BF, None, "TIRHUTA SIGN CANDRABINDU", 0x21, "Tirhuta"),
    c(0x114C0, None, "TIRHUTA SIGN ANUSVARA", 0x21, "Tirhuta"),
    c(0x114C1, None, "TIRHUTA SIGN VISARGA", 0x21, "Tirhuta"),
    c(0x114C2, None, "TIRHUTA SIGN VIRAMA", 0x20, "Tirhuta"),
    c(0x114C3, None, "TIRHUTA SIGN NUKTA", 0x20, "Tirhuta"),
    c(0x114C4, None, "TIRHUTA SIGN AVAGRAHA", 0x31, "Tirhuta"),
    c(0x114C5, None, "TIRHUTA GVANG", 0x31, "Tirhuta"),
    c(0x114C6, None, "TIRHUTA ABBREVIATION SIGN", 0x00, "Tirhuta"),
    c(0x114C7, None, "TIRHUTA OM", 0x31, "Tirhuta"),
    c(0x114D0, None, "TIRHUTA DIGIT ZERO", 0x20, "Tirhuta"),
    c(0x114D1, None, "TIRHUTA DIGIT ONE", 0x20, "Tirhuta"),
    c(0x114D2, None, "TIRHUTA DIGIT TWO", 0x20, "Tirhuta"),
    c(0x114D3, None, "TIRHUTA DIGIT THREE", 0x20, "Tirhuta"),
    c(0x114D4, None, "TIRHUTA DIGIT FOUR", 0x20, "Tirhuta"),
    c(0x114D5, None, "TIRHUTA DIGIT FIVE", 0x20, "Tirhuta"),
    c(0x114D6, None, "TIRHUTA DIGIT SIX", 0x20, "Tirhuta"),
    c(0x114D7, None, "TIRHUTA DIGIT SEVEN", 0x20, "Tirhuta"),
    c(0x114D8, None, "TIRHUTA DIGIT EIGHT", 0x20, "Tirhuta"),
    c(0x114D9, None, "TIRHUTA DIGIT NINE", 0x20, "Tirhuta"),
    c(0x11580, None, "SIDDHAM LETTER A", 0x31, "Siddham"),
    c(0x11581, None, "SIDDHAM LETTER AA", 0x31, "Siddham"),
    c(0x11582, None, "SIDDHAM LETTER I", 0x31, "Siddham"),
    c(0x11583, None, "SIDDHAM LETTER II", 0x31, "Siddham"),
    c(0x11584, None, "SIDDHAM LETTER U", 0x31, "Siddham"),
    c(0x11585, None, "SIDDHAM LETTER UU", 0x31, "Siddham"),
    c(0x11586, None, "SIDDHAM LETTER VOCALIC R", 0x31, "Siddham"),
    c(0x11587, None, "SIDDHAM LETTER VOCALIC RR", 0x31, "Siddham"),
    c(0x11588, None, "SIDDHAM LETTER VOCALIC L", 0x31, "Siddham"),
    c(0x11589, None, "SIDDHAM LETTER VOCALIC LL", 0x31, "Siddham"),
    c(0x1158A, None, "SIDDHAM LETTER E", 0x31, "Siddham"),
    c(0x1158B, None, "SIDDHAM LETTER AI", 0x31, "Siddham"),
    c(0x1158C, None, "SIDDHAM LETTER O", 0x31, "Siddham"),
    c(0x1158D, None, "SIDDHAM LETTER AU", 0x31, "Siddham"),
    c(0x1158E, None, "SIDDHAM LETTER KA", 0x31, "Siddham"),
    c(0x1158F, None, "SIDDHAM LETTER KHA", 0x31, "Siddham"),
    c(0x11590, None, "SIDDHAM LETTER GA", 0x31, "Siddham"),
    c(0x11591, None, "SIDDHAM LETTER GHA", 0x31, "Siddham"),
    c(0x11592, None, "SIDDHAM LETTER NGA", 0x31, "Siddham"),
    c(0x11593, None, "SIDDHAM LETTER CA", 0x31, "Siddham"),
    c(0x11594, None, "SIDDHAM LETTER CHA", 0x31, "Siddham"),
    c(0x11595, None, "SIDDHAM LETTER JA", 0x31, "Siddham"),
    c(0x11596, None, "SIDDHAM LETTER JHA", 0x31, "Siddham"),
    c(0x11597, None, "SIDDHAM LETTER NYA", 0x31, "Siddham"),
    c(0x11598, None, "SIDDHAM LETTER TTA", 0x31, "Siddham"),
    c(0x11599, None, "SIDDHAM LETTER TTHA", 0x31, "Siddham"),
    c(0x1159A, None, "SIDDHAM LETTER DDA", 0x31, "Siddham"),
    c(0x1159B, None, "SIDDHAM LETTER DDHA", 0x31, "Siddham"),
    c(0x1159C, None, "SIDDHAM LETTER NNA", 0x31, "Siddham"),
    c(0x1159D, None, "SIDDHAM LETTER TA", 0x31, "Siddham"),
    c(0x1159E, None, "SIDDHAM LETTER THA", 0x31, "Siddham"),
    c(0x1159F, None, "SIDDHAM LETTER DA", 0x31, "Siddham"),
    c(0x115A0, None, "SIDDHAM LETTER DHA", 0x31, "Siddham"),
    c(0x115A1, None, "SIDDHAM LETTER NA", 0x31, "Siddham"),
    c(0x115A2, None, "SIDDHAM LETTER PA", 0x31, "Siddham"),
    c(0x115A3, None, "SIDDHAM LETTER PHA", 0x31, "Siddham"),
    c(0x115A4, None, "SIDDHAM LETTER BA", 0x31, "Siddham"),
    c(0x115A5, None, "SIDDHAM LETTER BHA", 0x31, "Siddham"),
    c(0x115A6, None, "SIDDHAM LETTER MA", 0x31, "Siddham"),
    c(0x115A7, None, "SIDDHAM LETTER YA", 0x31, "Siddham"),
    c(0x115A8, None, "SIDDHAM LETTER RA", 0x31, "Siddham"),
    c(0x115A9, None, "SIDDHAM LETTER LA", 0x31, "Siddham"),
    c(0x115AA, None, "SIDDHAM LETTER VA", 0x31, "Siddham"),
    c(0x115AB, None, "SIDDHAM LETTER SHA", 0x31, "Siddham"),
    c(0x115AC, None, "SIDDHAM LETTER SSA", 0x31, "Siddham"),
    c(0x115AD, None, "SIDDHAM LETTER SA", 0x31, "Siddham"),
    c(0x115AE, None, "SIDDHAM LETTER HA", 0x31, "Siddham"),
    c(0x115AF, None, "SIDDHAM VOWEL SIGN AA", 0x21, "Siddham"),
    c(0x115B0, None, "SIDDHAM VOWEL SIGN I", 0x21, "Siddham"),
    c(0x115B1, None, "SIDDHAM VOWEL SIGN II", 0x21, "Siddham"),
    c(0x115B2, None, "SIDDHAM VOWEL SIGN U", 0x21, "Siddham"),
    c(0x115B3, None, "SIDDHAM VOWEL SIGN UU", 0x21, "Siddham"),
    c(0x115B4, None, "SIDDHAM VOWEL SIGN VOCALIC R", 0x21, "Siddham"),
    c(0x115B5, None, "SIDDHAM VOWEL SIGN VOCALIC RR", 0x21, "Siddham"),
    c(0x115B8, None, "SIDDHAM VOWEL SIGN E", 0x21, "Siddham"),
    c(0x115B9, None, "SIDDHAM VOWEL SIGN AI", 0x21, "Siddham"),
    c(0x115BA, None, "SIDDHAM VOWEL SIGN O", 0x21, "Siddham"),
    c(0x115BB, None, "SIDDHAM VOWEL SIGN AU", 0x21, "Siddham"),
    c(0x115BC, None, "SIDDHAM SIGN CANDRABINDU", 0x21, "Siddham"),
    c(0x115BD, None, "SIDDHAM SIGN ANUSVARA", 0x21, "Siddham"),
    c(0x115BE, None, "SIDDHAM SIGN VISARGA", 0x21, "Siddham"),
    c(0x115BF, None, "SIDDHAM SIGN VIRAMA", 0x20, "Siddham"),
    c(0x115C0, None, "SIDDHAM SIGN NUKTA", 0x20, "Siddham"),
    c(0x115C1, None, "SIDDHAM SIGN SIDDHAM", 0x00, "Siddham"),
    c(0x115C2, None, "SIDDHAM DANDA", 0x00, "Siddham"),
    c(0x115C3, None, "SIDDHAM DOUBLE DANDA", 0x00, "Siddham"),
    c(0x115C4, None, "SIDDHAM SEPARATOR DOT", 0x00, "Siddham"),
    c(0x115C5, None, "SIDDHAM SEPARATOR BAR", 0x00, "Siddham"),
    c(0x115C6, None, "SIDDHAM REPETITION MARK-1", 0x00, "Siddham"),
    c(0x115C7, None, "SIDDHAM REPETITION MARK-2", 0x00, "Siddham"),
    c(0x115C8, None, "SIDDHAM REPETITION MARK-3", 0x00, "Siddham"),
    c(0x115C9, None, "SIDDHAM END OF TEXT MARK", 0x00, "Siddham"),
    c(0x115CA, None, "SIDDHAM SECTION MARK WITH TRIDENT AND U-SHAPED ORNAMENTS", 0x00, "Siddham"),
    c(0x115CB, None, "SIDDHAM SECTION MARK WITH TRIDENT AND DOTTED CRESCENTS", 0x00, "Siddham"),
    c(0x115CC, None, "SIDDHAM SECTION MARK WITH RAYS AND DOTTED CRESCENTS", 0x00, "Siddham"),
    c(0x115CD, None, "SIDDHAM SECTION MARK WITH RAYS AND DOTTED DOUBLE CRESCENTS", 0x00, "Siddham"),
    c(0x115CE, None, "SIDDHAM SECTION MARK WITH RAYS AND DOTTED TRIPLE CRESCENTS", 0x00, "Siddham"),
    c(0x115CF, None, "SIDDHAM SECTION MARK DOUBLE RING", 0x00, "Siddham"),
    c(0x115D0, None, "SIDDHAM SECTION MARK DOUBLE RING WITH RAYS", 0x00, "Siddham"),
    c(0x115D1, None, "SIDDHAM SECTION MARK WITH DOUBLE CRESCENTS", 0x00, "Siddham"),
    c(0x115D2, None, "SIDDHAM SECTION MARK WITH TRIPLE CRESCENTS", 0x00, "Siddham"),
    c(0x115D3, None, "SIDDHAM SECTION MARK WITH QUADRUPLE CRESCENTS", 0x00, "Siddham"),
    c(0x115D4, None, "SIDDHAM SECTION MARK WITH SEPTUPLE CRESCENTS", 0x00, "Siddham"),
    c(0x115D5, None, "SIDDHAM SECTION MARK WITH CIRCLES AND RAYS", 0x00, "Siddham"),
    c(0x115D6, None, "SIDDHAM SECTION MARK WITH CIRCLES AND TWO ENCLOSURES", 0x00, "Siddham"),
    c(0x115D7, None, "SIDDHAM SECTION MARK WITH CIRCLES AND FOUR ENCLOSURES", 0x00, "Siddham"),
    c(0x115D8, None, "SIDDHAM LETTER THREE-CIRCLE ALTERNATE I", 0x31, "Siddham"),
    c(0x115D9, None, "SIDDHAM LETTER TWO-CIRCLE ALTERNATE I", 0x31, "Siddham"),
    c(0x115DA, None, "SIDDHAM LETTER TWO-CIRCLE ALTERNATE II", 0x31, "Siddham"),
    c(0x115DB, None, "SIDDHAM LETTER ALTERNATE U", 0x31, "Siddham"),
    c(0x115DC, None, "SIDDHAM VOWEL SIGN ALTERNATE U", 0x21, "Siddham"),
    c(0x115DD, None, "SIDDHAM VOWEL SIGN ALTERNATE UU", 0x21, "Siddham"),
    c(0x11600, None, "MODI LETTER A", 0x31, "Modi"),
    c(0x11601, None, "MODI LETTER AA", 0x31, "Modi"),
    c(0x11602, None, "MODI LETTER I", 0x31, "Modi"),
    c(0x11603, None, "MODI LETTER II", 0x31, "Modi"),
    c(0x11604, None, "MODI LETTER U", 0x31, "Modi"),
    c(0x11605, None, "MODI LETTER UU", 0x31, "Modi"),
    c(0x11606, None, "MODI LETTER VOCALIC R", 0x31, "Modi"),
    c(0x11607, None, "MODI LETTER VOCALIC RR", 0x31, "Modi"),
    c(0x11608, None, "MODI LETTER VOCALIC L", 0x31, "Modi"),
    c(0x11609, None, "MODI LETTER VOCALIC LL", 0x31, "Modi"),
    c(0x1160A, None, "MODI LETTER E", 0x31, "Modi"),
    c(0x1160B, None, "MODI LETTER AI", 0x31, "Modi"),
    c(0x1160C, None, "MODI LETTER O", 0x31, "Modi"),
    c(0x1160D, None, "MODI LETTER AU", 0x31, "Modi"),
    c(0x1160E, None, "MODI LETTER KA", 0x31, "Modi"),
    c(0x1160F, None, "MODI LETTER KHA", 0x31, "Modi"),
    c(0x11610, None, "MODI LETTER GA", 0x31, "Modi"),
    c(0x11611, None, "MODI LETTER GHA", 0x31, "Modi"),
    c(0x11612, None, "MODI LETTER NGA", 0x31, "Modi"),
    c(0x11613, None, "MODI LETTER CA", 0x31, "Modi"),
    c(0x11614, None, "MODI LETTER CHA", 0x31, "Modi"),
    c(0x11615, None, "MODI LETTER JA", 0x31, "Modi"),
    c(0x11616, None, "MODI LETTER JHA", 0x31, "Modi"),
    c(0x11617, None, "MODI LETTER NYA", 0x31, "Modi"),
    c(0x11618, None, "MODI LETTER TTA", 0x31, "Modi"),
    c(0x11619, None, "MODI LETTER TTHA", 0x31, "Modi"),
    c(0x1161A, None, "MODI LETTER DDA", 0x31, "Modi"),
    c(0x1161B, None, "MODI LETTER DDHA", 0x31, "Modi"),
    c(0x1161C, None, "MODI LETTER NNA", 0x31, "Modi"),
    c(0x1161D, None, "MODI LETTER TA", 0x31, "Modi"),
    c(0x1161E, None, "MODI LETTER THA", 0x31, "Modi"),
    c(0x1161F, None, "MODI LETTER DA", 0x31, "Modi"),
    c(0x11620, None, "MODI LETTER DHA", 0x31, "Modi"),
    c(0x11621, None, "MODI LETTER NA", 0x31, "Modi"),
    c(0x11622, None, "MODI LETTER PA", 0x31, "Modi"),
    c(0x11623, None, "MODI LETTER PHA", 0x31, "Modi"),
    c(0x11624, None, "MODI LETTER BA", 0x31, "Modi"),
    c(0x11625, None, "MODI LETTER BHA", 0x31, "Modi"),
    c(0x11626, None, "MODI LETTER MA", 0x31, "Modi"),
    c(0x11627, None, "MODI LETTER YA", 0x31, "Modi"),
    c(0x11628, None, "MODI LETTER RA", 0x31, "Modi"),
    c(0x11629, None, "MODI LETTER LA", 0x31, "Modi"),
    c(0x1162A, None, "MODI LETTER VA", 0x31, "Modi"),
    c(0x1162B, None, "MODI LETTER SHA", 0x31, "Modi"),
    c(0x1162C, None, "MODI LETTER SSA", 0x31, "Modi"),
    c(0x1162D, None, "MODI LETTER SA", 0x31, "Modi"),
    c(0x1162E, None, "MODI LETTER HA", 0x31, "Modi"),
    c(0x1162F, None, "MODI LETTER LLA", 0x31, "Modi"),
    c(0x11630, None, "MODI VOWEL SIGN AA", 0x21, "Modi"),
    c(0x11631, None, "MODI VOWEL SIGN I", 0x21, "Modi"),
    c(0x11632, None, "MODI VOWEL SIGN II", 0x21, "Modi"),
    c(0x11633, None, "MODI VOWEL SIGN U", 0x21, "Modi"),
    c(0x11634, None, "MODI VOWEL SIGN UU", 0x21, "Modi"),
    c(0x11635, None, "MODI VOWEL SIGN VOCALIC R", 0x21, "Modi"),
    c(0x11636, None, "MODI VOWEL SIGN VOCALIC RR", 0x21, "Modi"),
    c(0x11637, None, "MODI VOWEL SIGN VOCALIC L", 0x21, "Modi"),
    c(0x11638, None, "MODI VOWEL SIGN VOCALIC LL", 0x21, "Modi"),
    c(0x11639, None, "MODI VOWEL SIGN E", 0x21, "Modi"),
    c(0x1163A, None, "MODI VOWEL SIGN AI", 0x21, "Modi"),
    c(0x1163B, None, "MODI VOWEL SIGN O", 0x21, "Modi"),
    c(0x1163C, None, "MODI VOWEL SIGN AU", 0x21, "Modi"),
    c(0x1163D, None, "MODI SIGN ANUSVARA", 0x21, "Modi"),
    c(0x1163E, None, "MODI SIGN VISARGA", 0x21, "Modi"),
    c(0x1163F, None, "MODI SIGN VIRAMA", 0x20, "Modi"),
    c(0x11640, None, "MODI SIGN ARDHACANDRA", 0x21, "Modi"),
    c(0x11641, None, "MODI DANDA", 0x00, "Modi"),
    c(0x11642, None, "MODI DOUBLE DANDA", 0x00, "Modi"),
    c(0x11643, None, "MODI ABBREVIATION SIGN", 0x00, "Modi"),
    c(0x11644, None, "MODI SIGN HUVA", 0x31, "Modi"),
    c(0x11650, None, "MODI DIGIT ZERO", 0x20, "Modi"),
    c(0x11651, None, "MODI DIGIT ONE", 0x20, "Modi"),
    c(0x11652, None, "MODI DIGIT TWO", 0x20, "Modi"),
    c(0x11653, None, "MODI DIGIT THREE", 0x20, "Modi"),
    c(0x11654, None, "MODI DIGIT FOUR", 0x20, "Modi"),
    c(0x11655, None, "MODI DIGIT FIVE", 0x20, "Modi"),
    c(0x11656, None, "MODI DIGIT SIX", 0x20, "Modi"),
    c(0x11657, None, "MODI DIGIT SEVEN", 0x20, "Modi"),
    c(0x11658, None, "MODI DIGIT EIGHT", 0x20, "Modi"),
    c(0x11659, None, "MODI DIGIT NINE", 0x20, "Modi"),
    c(0x11660, None, "MONGOLIAN BIRGA WITH ORNAMENT", 0x00, "Mongolian_Sup"),
    c(0x11661, None, "MONGOLIAN ROTATED BIRGA", 0x00, "Mongolian_Sup"),
    c(0x11662, None, "MONGOLIAN DOUBLE BIRGA WITH ORNAMENT", 0x00, "Mongolian_Sup"),
    c(0x11663, None, "MONGOLIAN TRIPLE BIRGA WITH ORNAMENT", 0x00, "Mongolian_Sup"),
    c(0x11664, None, "MONGOLIAN BIRGA WITH DOUBLE ORNAMENT", 0x00, "Mongolian_Sup"),
    c(0x11665, None, "MONGOLIAN ROTATED BIRGA WITH ORNAMENT", 0x00, "Mongolian_Sup"),
    c(0x11666, None, "MONGOLIAN ROTATED BIRGA WITH DOUBLE ORNAMENT", 0x00, "Mongolian_Sup"),
    c(0x11667, None, "MONGOLIAN INVERTED BIRGA", 0x00, "Mongolian_Sup"),
    c(0x11668, None, "MONGOLIAN INVERTED BIRGA WITH DOUBLE ORNAMENT", 0x00, "Mongolian_Sup"),
    c(0x11669, None, "MONGOLIAN SWIRL BIRGA", 0x00, "Mongolian_Sup"),
    c(0x1166A, None, "MONGOLIAN SWIRL BIRGA WITH ORNAMENT", 0x00, "Mongolian_Sup"),
    c(0x1166B, None, "MONGOLIAN SWIRL BIRGA WITH DOUBLE ORNAMENT", 0x00, "Mongolian_Sup"),
    c(0x1166C, None, "MONGOLIAN TURNED SWIRL BIRGA WITH DOUBLE ORNAMENT", 0x00, "Mongolian_Sup"),
    c(0x11680, None, "TAKRI LETTER A", 0x31, "Takri"),
    c(0x11681, None, "TAKRI LETTER AA", 0x31, "Takri"),
    c(0x11682, None, "TAKRI LETTER I", 0x31, "Takri"),
    c(0x11683, None, "TAKRI LETTER II", 0x31, "Takri"),
    c(0x11684, None, "TAKRI LETTER U", 0x31, "Takri"),
    c(0x11685, None, "TAKRI LETTER UU", 0x31, "Takri"),
    c(0x11686, None, "TAKRI LETTER E", 0x31, "Takri"),
    c(0x11687, None, "TAKRI LETTER AI", 0x31, "Takri"),
    c(0x11688, None, "TAKRI LETTER O", 0x31, "Takri"),
    c(0x11689, None, "TAKRI LETTER AU", 0x31, "Takri"),
    c(0x1168A, None, "TAKRI LETTER KA", 0x31, "Takri"),
    c(0x1168B, None, "TAKRI LETTER KHA", 0x31, "Takri"),
    c(0x1168C, None, "TAKRI LETTER GA", 0x31, "Takri"),
    c(0x1168D, None, "TAKRI LETTER GHA", 0x31, "Takri"),
    c(0x1168E, None, "TAKRI LETTER NGA", 0x31, "Takri"),
    c(0x1168F, None, "TAKRI LETTER CA", 0x31, "Takri"),
    c(0x11690, None, "TAKRI LETTER CHA", 0x31, "Takri"),
    c(0x11691, None, "TAKRI LETTER JA", 0x31, "Takri"),
    c(0x11692, None, "TAKRI LETTER JHA", 0x31, "Takri"),
    c(0x11693, None, "TAKRI LETTER NYA", 0x31, "Takri"),
    c(0x11694, None, "TAKRI LETTER TTA", 0x31, "Takri"),
    c(0x11695, None, "TAKRI LETTER TTHA", 0x31, "Takri"),
    c(0x11696, None, "TAKRI LETTER DDA", 0x31, "Takri"),
    c(0x11697, None, "TAKRI LETTER DDHA", 0x31, "Takri"),
    c(0x11698, None, "TAKRI LETTER NNA", 0x31, "Takri"),
    c(0x11699, None, "TAKRI LETTER TA", 0x31, "Takri"),
    c(0x1169A, None, "TAKRI LETTER THA", 0x31, "Takri"),
    c(0x1169B, None, "TAKRI LETTER DA", 0x31, "Takri"),
    c(0x1169C, None, "TAKRI LETTER DHA", 0x31, "Takri"),
    c(0x1169D, None, "TAKRI LETTER NA", 0x31, "Takri"),
    c(0x1169E, None, "TAKRI LETTER PA", 0x31, "Takri"),
    c(0x1169F, None, "TAKRI LETTER PHA", 0x31, "Takri"),
    c(0x116A0, None, "TAKRI LETTER BA", 0x31, "Takri"),
    c(0x116A1, None, "TAKRI LETTER BHA", 0x31, "Takri"),
    c(0x116A2, None, "TAKRI LETTER MA", 0x31, "Takri"),
    c(0x116A3, None, "TAKRI LETTER YA", 0x31, "Takri"),
    c(0x116A4, None, "TAKRI LETTER RA", 0x31, "Takri"),
    c(0x116A5, None, "TAKRI LETTER LA", 0x31, "Takri"),
    c(0x116A6, None, "TAKRI LETTER VA", 0x31, "Takri"),
    c(0x116A7, None, "TAKRI LETTER SHA", 0x31, "Takri"),
    c(0x116A8, None, "TAKRI LETTER SA", 0x31, "Takri"),
    c(0x116A9, None, "TAKRI LETTER HA", 0x31, "Takri"),
    c(0x116AA, None, "TAKRI LETTER RRA", 0x31, "Takri"),
    c(0x116AB, None, "TAKRI SIGN ANUSVARA", 0x21, "Takri"),
    c(0x116AC, None, "TAKRI SIGN VISARGA", 0x21, "Takri"),
    c(0x116AD, None, "TAKRI VOWEL SIGN AA", 0x21, "Takri"),
    c(0x116AE, None, "TAKRI VOWEL SIGN I", 0x21, "Takri"),
    c(0x116AF, None, "TAKRI VOWEL SIGN II", 0x21, "Takri"),
    c(0x116B0, None, "TAKRI VOWEL SIGN U", 0x21, "Takri"),
    c(0x116B1, None, "TAKRI VOWEL SIGN UU", 0x21, "Takri"),
    c(0x116B2, None, "TAKRI VOWEL SIGN E", 0x21, "Takri"),
    c(0x116B3, None, "TAKRI VOWEL SIGN AI", 0x21, "Takri"),
    c(0x116B4, None, "TAKRI VOWEL SIGN O", 0x21, "Takri"),
    c(0x116B5, None, "TAKRI VOWEL SIGN AU", 0x21, "Takri"),
    c(0x116B6, None, "TAKRI SIGN VIRAMA", 0x20, "Takri"),
    c(0x116B7, None, "TAKRI SIGN NUKTA", 0x20, "Takri"),
    c(0x116B8, None, "TAKRI LETTER ARCHAIC KHA", 0x31, "Takri"),
    c(0x116B9, None, "TAKRI ABBREVIATION SIGN", 0x00, "Takri"),
    c(0x116C0, None, "TAKRI DIGIT ZERO", 0x20, "Takri"),
    c(0x116C1, None, "TAKRI DIGIT ONE", 0x20, "Takri"),
    c(0x116C2, None, "TAKRI DIGIT TWO", 0x20, "Takri"),
    c(0x116C3, None, "TAKRI DIGIT THREE", 0x20, "Takri"),
    c(0x116C4, None, "TAKRI DIGIT FOUR", 0x20, "Takri"),
    c(0x116C5, None, "TAKRI DIGIT FIVE", 0x20, "Takri"),
    c(0x116C6, None, "TAKRI DIGIT SIX", 0x20, "Takri"),
    c(0x116C7, None, "TAKRI DIGIT SEVEN", 0x20, "Takri"),
    c(0x116C8, None, "TAKRI DIGIT EIGHT", 0x20, "Takri"),
    c(0x116C9, None, "TAKRI DIGIT NINE", 0x20, "Takri"),
    c(0x11700, None, "AHOM LETTER KA", 0x31, "Ahom"),
    c(0x11701, None, "AHOM LETTER KHA", 0x31, "Ahom"),
    c(0x11702, None, "AHOM LETTER NGA", 0x31, "Ahom"),
    c(0x11703, None, "AHOM LETTER NA", 0x31, "Ahom"),
    c(0x11704, None, "AHOM LETTER TA", 0x31, "Ahom"),
    c(0x11705, None, "AHOM LETTER ALTERNATE TA", 0x31, "Ahom"),
    c(0x11706, None, "AHOM LETTER PA", 0x31, "Ahom"),
    c(0x11707, None, "AHOM LETTER PHA", 0x31, "Ahom"),
    c(0x11708, None, "AHOM LETTER BA", 0x31, "Ahom"),
    c(0x11709, None, "AHOM LETTER MA", 0x31, "Ahom"),
    c(0x1170A, None, "AHOM LETTER JA", 0x31, "Ahom"),
    c(0x1170B, None, "AHOM LETTER CHA", 0x31, "Ahom"),
    c(0x1170C, None, "AHOM LETTER THA", 0x31, "Ahom"),
    c(0x1170D, None, "AHOM LETTER RA", 0x31, "Ahom"),
    c(0x1170E, None, "AHOM LETTER LA", 0x31, "Ahom"),
    c(0x1170F, None, "AHOM LETTER SA", 0x31, "Ahom"),
    c(0x11710, None, "AHOM LETTER NYA", 0x31, "Ahom"),
    c(0x11711, None, "AHOM LETTER HA", 0x31, "Ahom"),
    c(0x11712, None, "AHOM LETTER A", 0x31, "Ahom"),
    c(0x11713, None, "AHOM LETTER DA", 0x31, "Ahom"),
    c(0x11714, None, "AHOM LETTER DHA", 0x31, "Ahom"),
    c(0x11715, None, "AHOM LETTER GA", 0x31, "Ahom"),
    c(0x11716, None, "AHOM LETTER ALTERNATE GA", 0x31, "Ahom"),
    c(0x11717, None, "AHOM LETTER GHA", 0x31, "Ahom"),
    c(0x11718, None, "AHOM LETTER BHA", 0x31, "Ahom"),
    c(0x11719, None, "AHOM LETTER JHA", 0x31, "Ahom"),
    c(0x1171A, None, "AHOM LETTER ALTERNATE BA", 0x31, "Ahom"),
    c(0x1171D, None, "AHOM CONSONANT SIGN MEDIAL LA", 0x21, "Ahom"),
    c(0x1171E, None, "AHOM CONSONANT SIGN MEDIAL RA", 0x21, "Ahom"),
    c(0x1171F, None, "AHOM CONSONANT SIGN MEDIAL LIGATING RA", 0x21, "Ahom"),
    c(0x11720, None, "AHOM VOWEL SIGN A", 0x21, "Ahom"),
    c(0x11721, None, "AHOM VOWEL SIGN AA", 0x21, "Ahom"),
    c(0x11722, None, "AHOM VOWEL SIGN I", 0x21, "Ahom"),
    c(0x11723, None, "AHOM VOWEL SIGN II", 0x21, "Ahom"),
    c(0x11724, None, "AHOM VOWEL SIGN U", 0x21, "Ahom"),
    c(0x11725, None, "AHOM VOWEL SIGN UU", 0x21, "Ahom"),
    c(0x11726, None, "AHOM VOWEL SIGN E", 0x21, "Ahom"),
    c(0x11727, None, "AHOM VOWEL SIGN AW", 0x21, "Ahom"),
    c(0x11728, None, "AHOM VOWEL SIGN O", 0x21, "Ahom"),
    c(0x11729, None, "AHOM VOWEL SIGN AI", 0x21, "Ahom"),
    c(0x1172A, None, "AHOM VOWEL SIGN AM", 0x21, "Ahom"),
    c(0x1172B, None, "AHOM SIGN KILLER", 0x20, "Ahom"),
    c(0x11730, None, "AHOM DIGIT ZERO", 0x20, "Ahom"),
    c(0x11731, None, "AHOM DIGIT ONE", 0x20, "Ahom"),
    c(0x11732, None, "AHOM DIGIT TWO", 0x20, "Ahom"),
    c(0x11733, None, "AHOM DIGIT THREE", 0x20, "Ahom"),
    c(0x11734, None, "AHOM DIGIT FOUR", 0x20, "Ahom"),
    c(0x11735, None, "AHOM DIGIT FIVE", 0x20, "Ahom"),
    c(0x11736, None, "AHOM DIGIT SIX", 0x20, "Ahom"),
    c(0x11737, None, "AHOM DIGIT SEVEN", 0x20, "Ahom"),
    c(0x11738, None, "AHOM DIGIT EIGHT", 0x20, "Ahom"),
    c(0x11739, None, "AHOM DIGIT NINE", 0x20, "Ahom"),
    c(0x1173A, None, "AHOM NUMBER TEN", 0x00, "Ahom"),
    c(0x1173B, None, "AHOM NUMBER TWENTY", 0x00, "Ahom"),
    c(0x1173C, None, "AHOM SIGN SMALL SECTION", 0x00, "Ahom"),
    c(0x1173D, None, "AHOM SIGN SECTION", 0x00, "Ahom"),
    c(0x1173E, None, "AHOM SIGN RULAI", 0x00, "Ahom"),
    c(0x1173F, None, "AHOM SYMBOL VI", 0x00, "Ahom"),
    c(0x11740, None, "AHOM LETTER CA", 0x31, "Ahom"),
    c(0x11741, None, "AHOM LETTER TTA", 0x31, "Ahom"),
    c(0x11742, None, "AHOM LETTER TTHA", 0x31, "Ahom"),
    c(0x11743, None, "AHOM LETTER DDA", 0x31, "Ahom"),
    c(0x11744, None, "AHOM LETTER DDHA", 0x31, "Ahom"),
    c(0x11745, None, "AHOM LETTER NNA", 0x31, "Ahom"),
    c(0x11746, None, "AHOM LETTER LLA", 0x31, "Ahom"),
    c(0x11800, None, "DOGRA LETTER A", 0x31, "Dogra"),
    c(0x11801, None, "DOGRA LETTER AA", 0x31, "Dogra"),
    c(0x11802, None, "DOGRA LETTER I", 0x31, "Dogra"),
    c(0x11803, None, "DOGRA LETTER II", 0x31, "Dogra"),
    c(0x11804, None, "DOGRA LETTER U", 0x31, "Dogra"),
    c(0x11805, None, "DOGRA LETTER UU", 0x31, "Dogra"),
    c(0x11806, None, "DOGRA LETTER E", 0x31, "Dogra"),
    c(0x11807, None, "DOGRA LETTER AI", 0x31, "Dogra"),
    c(0x11808, None, "DOGRA LETTER O", 0x31, "Dogra"),
    c(0x11809, None, "DOGRA LETTER AU", 0x31, "Dogra"),
    c(0x1180A, None, "DOGRA LETTER KA", 0x31, "Dogra"),
    c(0x1180B, None, "DOGRA LETTER KHA", 0x31, "Dogra"),
    c(0x1180C, None, "DOGRA LETTER GA", 0x31, "Dogra"),
    c(0x1180D, None, "DOGRA LETTER GHA", 0x31, "Dogra"),
    c(0x1180E, None, "DOGRA LETTER NGA", 0x31, "Dogra"),
    c(0x1180F, None, "DOGRA LETTER CA", 0x31, "Dogra"),
    c(0x11810, None, "DOGRA LETTER CHA", 0x31, "Dogra"),
    c(0x11811, None, "DOGRA LETTER JA", 0x31, "Dogra"),
    c(0x11812, None, "DOGRA LETTER JHA", 0x31, "Dogra"),
    c(0x11813, None, "DOGRA LETTER NYA", 0x31, "Dogra"),
    c(0x11814, None, "DOGRA LETTER TTA", 0x31, "Dogra"),
    c(0x11815, None, "DOGRA LETTER TTHA", 0x31, "Dogra"),
    c(0x11816, None, "DOGRA LETTER DDA", 0x31, "Dogra"),
    c(0x11817, None, "DOGRA LETTER DDHA", 0x31, "Dogra"),
    c(0x11818, None, "DOGRA LETTER NNA", 0x31, "Dogra"),
    c(0x11819, None, "DOGRA LETTER TA", 0x31, "Dogra"),
    c(0x1181A, None, "DOGRA LETTER THA", 0x31, "Dogra"),
    c(0x1181B, None, "DOGRA LETTER DA", 0x31, "Dogra"),
    c(0x1181C, None, "DOGRA LETTER DHA", 0x31, "Dogra"),
    c(0x1181D, None, "DOGRA LETTER NA", 0x31, "Dogra"),
    c(0x1181E, None, "DOGRA LETTER PA", 0x31, "Dogra"),
    c(0x1181F, None, "DOGRA LETTER PHA", 0x31, "Dogra"),
    c(0x11820, None, "DOGRA LETTER BA", 0x31, "Dogra"),
    c(0x11821, None, "DOGRA LETTER BHA", 0x31, "Dogra"),
    c(0x11822, None, "DOGRA LETTER MA", 0x31, "Dogra"),
    c(0x11823, None, "DOGRA LETTER YA", 0x31, "Dogra"),
    c(0x11824, None, "DOGRA LETTER RA", 0x31, "Dogra"),
    c(0x11825, None, "DOGRA LETTER LA", 0x31, "Dogra"),
    c(0x11826, None, "DOGRA LETTER VA", 0x31, "Dogra"),
    c(0x11827, None, "DOGRA LETTER SHA", 0x31, "Dogra"),
    c(0x11828, None, "DOGRA LETTER SSA", 0x31, "Dogra"),
    c(0x11829, None, "DOGRA LETTER SA", 0x31, "Dogra"),
    c(0x1182A, None, "DOGRA LETTER HA", 0x31, "Dogra"),
    c(0x1182B, None, "DOGRA LETTER RRA", 0x31, "Dogra"),
    c(0x1182C, None, "DOGRA VOWEL SIGN AA", 0x21, "Dogra"),
    c(0x1182D, None, "DOGRA VOWEL SIGN I", 0x21, "Dogra"),
    c(0x1182E, None, "DOGRA VOWEL SIGN II", 0x21, "Dogra"),
    c(0x1182F, None, "DOGRA VOWEL SIGN U", 0x21, "Dogra"),
    c(0x11830, None, "DOGRA VOWEL SIGN UU", 0x21, "Dogra"),
    c(0x11831, None, "DOGRA VOWEL SIGN VOCALIC R", 0x21, "Dogra"),
    c(0x11832, None, "DOGRA VOWEL SIGN VOCALIC RR", 0x21, "Dogra"),
    c(0x11833, None, "DOGRA VOWEL SIGN E", 0x21, "Dogra"),
    c(0x11834, None, "DOGRA VOWEL SIGN AI", 0x21, "Dogra"),
    c(0x11835, None, "DOGRA VOWEL SIGN O", 0x21, "Dogra"),
    c(0x11836, None, "DOGRA VOWEL SIGN AU", 0x21, "Dogra"),
    c(0x11837, None, "DOGRA SIGN ANUSVARA", 0x21, "Dogra"),
    c(0x11838, None, "DOGRA SIGN VISARGA", 0x21, "Dogra"),
    c(0x11839, None, "DOGRA SIGN VIRAMA", 0x20, "Dogra"),
    c(0x1183A, None, "DOGRA SIGN NUKTA", 0x20, "Dogra"),
    c(0x1183B, None, "DOGRA ABBREVIATION SIGN", 0x00, "Dogra"),
    c(0x118A0, None, "WARANG CITI CAPITAL LETTER NGAA", 0x31, "Warang_Citi"),
    c(0x118A1, None, "WARANG CITI CAPITAL LETTER A", 0x31, "Warang_Citi"),
    c(0x118A2, None, "WARANG CITI CAPITAL LETTER WI", 0x31, "Warang_Citi"),
    c(0x118A3, None, "WARANG CITI CAPITAL LETTER YU", 0x31, "Warang_Citi"),
    c(0x118A4, None, "WARANG CITI CAPITAL LETTER YA", 0x31, "Warang_Citi"),
    c(0x118A5, None, "WARANG CITI CAPITAL LETTER YO", 0x31, "Warang_Citi"),
    c(0x118A6, None, "WARANG CITI CAPITAL LETTER II", 0x31, "Warang_Citi"),
    c(0x118A7, None, "WARANG CITI CAPITAL LETTER UU", 0x31, "Warang_Citi"),
    c(0x118A8, None, "WARANG CITI CAPITAL LETTER E", 0x31, "Warang_Citi"),
    c(0x118A9, None, "WARANG CITI CAPITAL LETTER O", 0x31, "Warang_Citi"),
    c(0x118AA, None, "WARANG CITI CAPITAL LETTER ANG", 0x31, "Warang_Citi"),
    c(0x118AB, None, "WARANG CITI CAPITAL LETTER GA", 0x31, "Warang_Citi"),
    c(0x118AC, None, "WARANG CITI CAPITAL LETTER KO", 0x31, "Warang_Citi"),
    c(0x118AD, None, "WARANG CITI CAPITAL LETTER ENY", 0x31, "Warang_Citi"),
    c(0x118AE, None, "WARANG CITI CAPITAL LETTER YUJ", 0x31, "Warang_Citi"),
    c(0x118AF, None, "WARANG CITI CAPITAL LETTER UC", 0x31, "Warang_Citi"),
    c(0x118B0, None, "WARANG CITI CAPITAL LETTER ENN", 0x31, "Warang_Citi"),
    c(0x118B1, None, "WARANG CITI CAPITAL LETTER ODD", 0x31, "Warang_Citi"),
    c(0x118B2, None, "WARANG CITI CAPITAL LETTER TTE", 0x31, "Warang_Citi"),
    c(0x118B3, None, "WARANG CITI CAPITAL LETTER NUNG", 0x31, "Warang_Citi"),
    c(0x118B4, None, "WARANG CITI CAPITAL LETTER DA", 0x31, "Warang_Citi"),
    c(0x118B5, None, "WARANG CITI CAPITAL LETTER AT", 0x31, "Warang_Citi"),
    c(0x118B6, None, "WARANG CITI CAPITAL LETTER AM", 0x31, "Warang_Citi"),
    c(0x118B7, None, "WARANG CITI CAPITAL LETTER BU", 0x31, "Warang_Citi"),
    c(0x118B8, None, "WARANG CITI CAPITAL LETTER PU", 0x31, "Warang_Citi"),
    c(0x118B9, None, "WARANG CITI CAPITAL LETTER HIYO", 0x31, "Warang_Citi"),
    c(0x118BA, None, "WARANG CITI CAPITAL LETTER HOLO", 0x31, "Warang_Citi"),
    c(0x118BB, None, "WARANG CITI CAPITAL LETTER HORR", 0x31, "Warang_Citi"),
    c(0x118BC, None, "WARANG CITI CAPITAL LETTER HAR", 0x31, "Warang_Citi"),
    c(0x118BD, None, "WARANG CITI CAPITAL LETTER SSUU", 0x31, "Warang_Citi"),
    c(0x118BE, None, "WARANG CITI CAPITAL LETTER SII", 0x31, "Warang_Citi"),
    c(0x118BF, None, "WARANG CITI CAPITAL LETTER VIYO", 0x31, "Warang_Citi"),
    c(0x118C0, None, "WARANG CITI SMALL LETTER NGAA", 0x31, "Warang_Citi"),
    c(0x118C1, None, "WARANG CITI SMALL LETTER A", 0x31, "Warang_Citi"),
    c(0x118C2, None, "WARANG CITI SMALL LETTER WI", 0x31, "Warang_Citi"),
    c(0x118C3, None, "WARANG CITI SMALL LETTER YU", 0x31, "Warang_Citi"),
    c(0x118C4, None, "WARANG CITI SMALL LETTER YA", 0x31, "Warang_Citi"),
    c(0x118C5, None, "WARANG CITI SMALL LETTER YO", 0x31, "Warang_Citi"),
    c(0x118C6, None, "WARANG CITI SMALL LETTER II", 0x31, "Warang_Citi"),
    c(0x118C7, None, "WARANG CITI SMALL LETTER UU", 0x31, "Warang_Citi"),
    c(0x118C8, None, "WARANG CITI SMALL LETTER E", 0x31, "Warang_Citi"),
    c(0x118C9, None, "WARANG CITI SMALL LETTER O", 0x31, "Warang_Citi"),
    c(0x118CA, None, "WARANG CITI SMALL LETTER ANG", 0x31, "Warang_Citi"),
    c(0x118CB, None, "WARANG CITI SMALL LETTER GA", 0x31, "Warang_Citi"),
    c(0x118CC, None, "WARANG CITI SMALL LETTER KO", 0x31, "Warang_Citi"),
    c(0x118CD, None, "WARANG CITI SMALL LETTER ENY", 0x31, "Warang_Citi"),
    c(0x118CE, None, "WARANG CITI SMALL LETTER YUJ", 0x31, "Warang_Citi"),
    c(0x118CF, None, "WARANG CITI SMALL LETTER UC", 0x31, "Warang_Citi"),
    c(0x118D0, None, "WARANG CITI SMALL LETTER ENN", 0x31, "Warang_Citi"),
    c(0x118D1, None, "WARANG CITI SMALL LETTER ODD", 0x31, "Warang_Citi"),
    c(0x118D2, None, "WARANG CITI SMALL LETTER TTE", 0x31, "Warang_Citi"),
    c(0x118D3, None, "WARANG CITI SMALL LETTER NUNG", 0x31, "Warang_Citi"),
    c(0x118D4, None, "WARANG CITI SMALL LETTER DA", 0x31, "Warang_Citi"),
    c(0x118D5, None, "WARANG CITI SMALL LETTER AT", 0x31, "Warang_Citi"),
    c(0x118D6, None, "WARANG CITI SMALL LETTER AM", 0x31, "Warang_Citi"),
    c(0x118D7, None, "WARANG CITI SMALL LETTER BU", 0x31, "Warang_Citi"),
    c(0x118D8, None, "WARANG CITI SMALL LETTER PU", 0x31, "Warang_Citi"),
    c(0x118D9, None, "WARANG CITI SMALL LETTER HIYO", 0x31, "Warang_Citi"),
    c(0x118DA, None, "WARANG CITI SMALL LETTER HOLO", 0x31, "Warang_Citi"),
    c(0x118DB, None, "WARANG CITI SMALL LETTER HORR", 0x31, "Warang_Citi"),
    c(0x118DC, None, "WARANG CITI SMALL LETTER HAR", 0x31, "Warang_Citi"),
    c(0x118DD, None, "WARANG CITI SMALL LETTER SSUU", 0x31, "Warang_Citi"),
    c(0x118DE, None, "WARANG CITI SMALL LETTER SII", 0x31, "Warang_Citi"),
    c(0x118DF, None, "WARANG CITI SMALL LETTER VIYO", 0x31, "Warang_Citi"),
    c(0x118E0, None, "WARANG CITI DIGIT ZERO", 0x20, "Warang_Citi"),
    c(0x118E1, None, "WARANG CITI DIGIT ONE", 0x20, "Warang_Citi"),
    c(0x118E2, None, "WARANG CITI DIGIT TWO", 0x20, "Warang_Citi"),
    c(0x118E3, None, "WARANG CITI DIGIT THREE", 0x20, "Warang_Citi"),
    c(0x118E4, None, "WARANG CITI DIGIT FOUR", 0x20, "Warang_Citi"),
    c(0x118E5, None, "WARANG CITI DIGIT FIVE", 0x20, "Warang_Citi"),
    c(0x118E6, None, "WARANG CITI DIGIT SIX", 0x20, "Warang_Citi"),
    c(0x118E7, None, "WARANG CITI DIGIT SEVEN", 0x20, "Warang_Citi"),
    c(0x118E8, None, "WARANG CITI DIGIT EIGHT", 0x20, "Warang_Citi"),
    c(0x118E9, None, "WARANG CITI DIGIT NINE", 0x20, "Warang_Citi"),
    c(0x118EA, None, "WARANG CITI NUMBER TEN", 0x00, "Warang_Citi"),
    c(0x118EB, None, "WARANG CITI NUMBER TWENTY", 0x00, "Warang_Citi"),
    c(0x118EC, None, "WARANG CITI NUMBER THIRTY", 0x00, "Warang_Citi"),
    c(0x118ED, None, "WARANG CITI NUMBER FORTY", 0x00, "Warang_Citi"),
    c(0x118EE, None, "WARANG CITI NUMBER FIFTY", 0x00, "Warang_Citi"),
    c(0x118EF, None, "WARANG CITI NUMBER SIXTY", 0x00, "Warang_Citi"),
    c(0x118F0, None, "WARANG CITI NUMBER SEVENTY", 0x00, "Warang_Citi"),
    c(0x118F1, None, "WARANG CITI NUMBER EIGHTY", 0x00, "Warang_Citi"),
    c(0x118F2, None, "WARANG CITI NUMBER NINETY", 0x00, "Warang_Citi"),
    c(0x118FF, None, "WARANG CITI OM", 0x31, "Warang_Citi"),
    c(0x11900, None, "DIVES AKURU LETTER A", 0x31, "Dives_Akuru"),
    c(0x11901, None, "DIVES AKURU LETTER AA", 0x31, "Dives_Akuru"),
    c(0x11902, None, "DIVES AKURU LETTER I", 0x31, "Dives_Akuru"),
    c(0x11903, None, "DIVES AKURU LETTER II", 0x31, "Dives_Akuru"),
    c(0x11904, None, "DIVES AKURU LETTER U", 0x31, "Dives_Akuru"),
    c(0x11905, None, "DIVES AKURU LETTER UU", 0x31, "Dives_Akuru"),
    c(0x11906, None, "DIVES AKURU LETTER E", 0x31, "Dives_Akuru"),
    c(0x11909, None, "DIVES AKURU LETTER O", 0x31, "Dives_Akuru"),
    c(0x1190C, None, "DIVES AKURU LETTER KA", 0x31, "Dives_Akuru"),
    c(0x1190D, None, "DIVES AKURU LETTER KHA", 0x31, "Dives_Akuru"),
    c(0x1190E, None, "DIVES AKURU LETTER GA", 0x31, "Dives_Akuru"),
    c(0x1190F, None, "DIVES AKURU LETTER GHA", 0x31, "Dives_Akuru"),
    c(0x11910, None, "DIVES AKURU LETTER NGA", 0x31, "Dives_Akuru"),
    c(0x11911, None, "DIVES AKURU LETTER CA", 0x31, "Dives_Akuru"),
    c(0x11912, None, "DIVES AKURU LETTER CHA", 0x31, "Dives_Akuru"),
    c(0x11913, None, "DIVES AKURU LETTER JA", 0x31, "Dives_Akuru"),
    c(0x11915, None, "DIVES AKURU LETTER NYA", 0x31, "Dives_Akuru"),
    c(0x11916, None, "DIVES AKURU LETTER TTA", 0x31, "Dives_Akuru"),
    c(0x11918, None, "DIVES AKURU LETTER DDA", 0x31, "Dives_Akuru"),
    c(0x11919, None, "DIVES AKURU LETTER DDHA", 0x31, "Dives_Akuru"),
    c(0x1191A, None, "DIVES AKURU LETTER NNA", 0x31, "Dives_Akuru"),
    c(0x1191B, None, "DIVES AKURU LETTER TA", 0x31, "Dives_Akuru"),
    c(0x1191C, None, "DIVES AKURU LETTER THA", 0x31, "Dives_Akuru"),
    c(0x1191D, None, "DIVES AKURU LETTER DA", 0x31, "Dives_Akuru"),
    c(0x1191E, None, "DIVES AKURU LETTER DHA", 0x31, "Dives_Akuru"),
    c(0x1191F, None, "DIVES AKURU LETTER NA", 0x31, "Dives_Akuru"),
    c(0x11920, None, "DIVES AKURU LETTER PA", 0x31, "Dives_Akuru"),
    c(0x11921, None, "DIVES AKURU LETTER PHA", 0x31, "Dives_Akuru"),
    c(0x11922, None, "DIVES AKURU LETTER BA", 0x31, "Dives_Akuru"),
    c(0x11923, None, "DIVES AKURU LETTER BHA", 0x31, "Dives_Akuru"),
    c(0x11924, None, "DIVES AKURU LETTER MA", 0x31, "Dives_Akuru"),
    c(0x11925, None, "DIVES AKURU LETTER YA", 0x31, "Dives_Akuru"),
    c(0x11926, None, "DIVES AKURU LETTER YYA", 0x31, "Dives_Akuru"),
    c(0x11927, None, "DIVES AKURU LETTER RA", 0x31, "Dives_Akuru"),
    c(0x11928, None, "DIVES AKURU LETTER LA", 0x31, "Dives_Akuru"),
    c(0x11929, None, "DIVES AKURU LETTER VA", 0x31, "Dives_Akuru"),
    c(0x1192A, None, "DIVES AKURU LETTER SHA", 0x31, "Dives_Akuru"),
    c(0x1192B, None, "DIVES AKURU LETTER SSA", 0x31, "Dives_Akuru"),
    c(0x1192C, None, "DIVES AKURU LETTER SA", 0x31, "Dives_Akuru"),
    c(0x1192D, None, "DIVES AKURU LETTER HA", 0x31, "Dives_Akuru"),
    c(0x1192E, None, "DIVES AKURU LETTER LLA", 0x31, "Dives_Akuru"),
    c(0x1192F, None, "DIVES AKURU LETTER ZA", 0x31, "Dives_Akuru"),
    c(0x11930, None, "DIVES AKURU VOWEL SIGN AA", 0x21, "Dives_Akuru"),
    c(0x11931, None, "DIVES AKURU VOWEL SIGN I", 0x21, "Dives_Akuru"),
    c(0x11932, None, "DIVES AKURU VOWEL SIGN II", 0x21, "Dives_Akuru"),
    c(0x11933, None, "DIVES AKURU VOWEL SIGN U", 0x21, "Dives_Akuru"),
    c(0x11934, None, "DIVES AKURU VOWEL SIGN UU", 0x21, "Dives_Akuru"),
    c(0x11935, None, "DIVES AKURU VOWEL SIGN E", 0x21, "Dives_Akuru"),
    c(0x11937, None, "DIVES AKURU VOWEL SIGN AI", 0x21, "Dives_Akuru"),
    c(0x11938, None, "DIVES AKURU VOWEL SIGN O", 0x21, "Dives_Akuru"),
    c(0x1193B, None, "DIVES AKURU SIGN ANUSVARA", 0x21, "Dives_Akuru"),
    c(0x1193C, None, "DIVES AKURU SIGN CANDRABINDU", 0x21, "Dives_Akuru"),
    c(0x1193D, None, "DIVES AKURU SIGN HALANTA", 0x20, "Dives_Akuru"),
    c(0x1193E, None, "DIVES AKURU VIRAMA", 0x20, "Dives_Akuru"),
    c(0x1193F, None, "DIVES AKURU PREFIXED NASAL SIGN", 0x31, "Dives_Akuru"),
    c(0x11940, None, "DIVES AKURU MEDIAL YA", 0x21, "Dives_Akuru"),
    c(0x11941, None, "DIVES AKURU INITIAL RA", 0x31, "Dives_Akuru"),
    c(0x11942, None, "DIVES AKURU MEDIAL RA", 0x21, "Dives_Akuru"),
    c(0x11943, None, "DIVES AKURU SIGN NUKTA", 0x20, "Dives_Akuru"),
    c(0x11944, None, "DIVES AKURU DOUBLE DANDA", 0x00, "Dives_Akuru"),
    c(0x11945, None, "DIVES AKURU GAP FILLER", 0x00, "Dives_Akuru"),
    c(0x11946, None, "DIVES AKURU END OF TEXT MARK", 0x00, "Dives_Akuru"),
    c(0x11950, None, "DIVES AKURU DIGIT ZERO", 0x20, "Dives_Akuru"),
    c(0x11951, None, "DIVES AKURU DIGIT ONE", 0x20, "Dives_Akuru"),
    c(0x11952, None, "DIVES AKURU DIGIT TWO", 0x20, "Dives_Akuru"),
    c(0x11953, None, "DIVES AKURU DIGIT THREE", 0x20, "Dives_Akuru"),
    c(0x11954, None, "DIVES AKURU DIGIT FOUR", 0x20, "Dives_Akuru"),
    c(0x11955, None, "DIVES AKURU DIGIT FIVE", 0x20, "Dives_Akuru"),
    c(0x11956, None, "DIVES AKURU DIGIT SIX", 0x20, "Dives_Akuru"),
    c(0x11957, None, "DIVES AKURU DIGIT SEVEN", 0x20, "Dives_Akuru"),
    c(0x11958, None, "DIVES AKURU DIGIT EIGHT", 0x20, "Dives_Akuru"),
    c(0x11959, None, "DIVES AKURU DIGIT NINE", 0x20, "Dives_Akuru"),
    c(0x119A0, None, "NANDINAGARI LETTER A", 0x31, "Nandinagari"),
    c(0x119A1, None, "NANDINAGARI LETTER AA", 0x31, "Nandinagari"),
    c(0x119A2, None, "NANDINAGARI LETTER I", 0x31, "Nandinagari"),
    c(0x119A3, None, "NANDINAGARI LETTER II", 0x31, "Nandinagari"),
    c(0x119A4, None, "NANDINAGARI LETTER U", 0x31, "Nandinagari"),
    c(0x119A5, None, "NANDINAGARI LETTER UU", 0x31, "Nandinagari"),
    c(0x119A6, None, "NANDINAGARI LETTER VOCALIC R", 0x31, "Nandinagari"),
    c(0x119A7, None, "NANDINAGARI LETTER VOCALIC RR", 0x31, "Nandinagari"),
    c(0x119AA, None, "NANDINAGARI LETTER E", 0x31, "Nandinagari"),
    c(0x119AB, None, "NANDINAGARI LETTER AI", 0x31, "Nandinagari"),
    c(0x119AC, None, "NANDINAGARI LETTER O", 0x31, "Nandinagari"),
    c(0x119AD, None, "NANDINAGARI LETTER AU", 0x31, "Nandinagari"),
    c(0x119AE, None, "NANDINAGARI LETTER KA", 0x31, "Nandinagari"),
    c(0x119AF, None, "NANDINAGARI LETTER KHA", 0x31, "Nandinagari"),
    c(0x119B0, None, "NANDINAGARI LETTER GA", 0x31, "Nandinagari"),
    c(0x119B1, None, "NANDINAGARI LETTER GHA", 0x31, "Nandinagari"),
    c(0x119B2, None, "NANDINAGARI LETTER NGA", 0x31, "Nandinagari"),
    c(0x119B3, None, "NANDINAGARI LETTER CA", 0x31, "Nandinagari"),
    c(0x119B4, None, "NANDINAGARI LETTER CHA", 0x31, "Nandinagari"),
    c(0x119B5, None, "NANDINAGARI LETTER JA", 0x31, "Nandinagari"),
    c(0x119B6, None, "NANDINAGARI LETTER JHA", 0x31, "Nandinagari"),
    c(0x119B7, None, "NANDINAGARI LETTER NYA", 0x31, "Nandinagari"),
    c(0x119B8, None, "NANDINAGARI LETTER TTA", 0x31, "Nandinagari"),
    c(0x119B9, None, "NANDINAGARI LETTER TTHA", 0x31, "Nandinagari"),
    c(0x119BA, None, "NANDINAGARI LETTER DDA", 0x31, "Nandinagari"),
    c(0x119BB, None, "NANDINAGARI LETTER DDHA", 0x31, "Nandinagari"),
    c(0x119BC, None, "NANDINAGARI LETTER NNA", 0x31, "Nandinagari"),
    c(0x119BD, None, "NANDINAGARI LETTER TA", 0x31, "Nandinagari"),
    c(0x119BE, None, "NANDINAGARI LETTER THA", 0x31, "Nandinagari"),
    c(0x119BF, None, "NANDINAGARI LETTER DA", 0x31, "Nandinagari"),
    c(0x119C0, None, "NANDINAGARI LETTER DHA", 0x31, "Nandinagari"),
    c(0x119C1, None, "NANDINAGARI LETTER NA", 0x31, "Nandinagari"),
    c(0x119C2, None, "NANDINAGARI LETTER PA", 0x31, "Nandinagari"),
    c(0x119C3, None, "NANDINAGARI LETTER PHA", 0x31, "Nandinagari"),
    c(0x119C4, None, "NANDINAGARI LETTER BA", 0x31, "Nandinagari"),
    c(0x119C5, None, "NANDINAGARI LETTER BHA", 0x31, "Nandinagari"),
    c(0x119C6, None, "NANDINAGARI LETTER MA", 0x31, "Nandinagari"),
    c(0x119C7, None, "NANDINAGARI LETTER YA", 0x31, "Nandinagari"),
    c(0x119C8, None, "NANDINAGARI LETTER RA", 0x31, "Nandinagari"),
    c(0x119C9, None, "NANDINAGARI LETTER LA", 0x31, "Nandinagari"),
    c(0x119CA, None, "NANDINAGARI LETTER VA", 0x31, "Nandinagari"),
    c(0x119CB, None, "NANDINAGARI LETTER SHA", 0x31, "Nandinagari"),
    c(0x119CC, None, "NANDINAGARI LETTER SSA", 0x31, "Nandinagari"),
    c(0x119CD, None, "NANDINAGARI LETTER SA", 0x31, "Nandinagari"),
    c(0x119CE, None, "NANDINAGARI LETTER HA", 0x31, "Nandinagari"),
    c(0x119CF, None, "NANDINAGARI LETTER LLA", 0x31, "Nandinagari"),
    c(0x119D0, None, "NANDINAGARI LETTER RRA", 0x31, "Nandinagari"),
    c(0x119D1, None, "NANDINAGARI VOWEL SIGN AA", 0x21, "Nandinagari"),
    c(0x119D2, None, "NANDINAGARI VOWEL SIGN I", 0x21, "Nandinagari"),
    c(0x119D3, None, "NANDINAGARI VOWEL SIGN II", 0x21, "Nandinagari"),
    c(0x119D4, None, "NANDINAGARI VOWEL SIGN U", 0x21, "Nandinagari"),
    c(0x119D5, None, "NANDINAGARI VOWEL SIGN UU", 0x21, "Nandinagari"),
    c(0x119D6, None, "NANDINAGARI VOWEL SIGN VOCALIC R", 0x21, "Nandinagari"),
    c(0x119D7, None, "NANDINAGARI VOWEL SIGN VOCALIC RR", 0x21, "Nandinagari"),
    c(0x119DA, None, "NANDINAGARI VOWEL SIGN E", 0x21, "Nandinagari"),
    c(0x119DB, None, "NANDINAGARI VOWEL SIGN AI", 0x21, "Nandinagari"),
    c(0x119DC, None, "NANDINAGARI VOWEL SIGN O", 0x21, "Nandinagari"),
    c(0x119DD, None, "NANDINAGARI VOWEL SIGN AU", 0x21, "Nandinagari"),
    c(0x119DE, None, "NANDINAGARI SIGN ANUSVARA", 0x21, "Nandinagari"),
    c(0x119DF, None, "NANDINAGARI SIGN VISARGA", 0x21, "Nandinagari"),
    c(0x119E0, None, "NANDINAGARI SIGN VIRAMA", 0x20, "Nandinagari"),
    c(0x119E1, None, "NANDINAGARI SIGN AVAGRAHA", 0x31, "Nandinagari"),
    c(0x119E2, None, "NANDINAGARI SIGN SIDDHAM", 0x00, "Nandinagari"),
    c(0x119E3, None, "NANDINAGARI HEADSTROKE", 0x31, "Nandinagari"),
    c(0x119E4, None, "NANDINAGARI VOWEL SIGN PRISHTHAMATRA E", 0x21, "Nandinagari"),
    c(0x11A00, None, "ZANABAZAR SQUARE LETTER A", 0x31, "Zanabazar_Square"),
    c(0x11A01, None, "ZANABAZAR SQUARE VOWEL SIGN I", 0x21, "Zanabazar_Square"),
    c(0x11A02, None, "ZANABAZAR SQUARE VOWEL SIGN UE", 0x21, "Zanabazar_Square"),
    c(0x11A03, None, "ZANABAZAR SQUARE VOWEL SIGN U", 0x21, "Zanabazar_Square"),
    c(0x11A04, None, "ZANABAZAR SQUARE VOWEL SIGN E", 0x21, "Zanabazar_Square"),
    c(0x11A05, None, "ZANABAZAR SQUARE VOWEL SIGN OE", 0x21, "Zanabazar_Square"),
    c(0x11A06, None, "ZANABAZAR SQUARE VOWEL SIGN O", 0x21, "Zanabazar_Square"),
    c(0x11A07, None, "ZANABAZAR SQUARE VOWEL SIGN AI", 0x21, "Zanabazar_Square"),
    c(0x11A08, None, "ZANABAZAR SQUARE VOWEL SIGN AU", 0x21, "Zanabazar_Square"),
    c(0x11A09, None, "ZANABAZAR SQUARE VOWEL SIGN REVERSED I", 0x21, "Zanabazar_Square"),
    c(0x11A0A, None, "ZANABAZAR SQUARE VOWEL LENGTH MARK", 0x21, "Zanabazar_Square"),
    c(0x11A0B, None, "ZANABAZAR SQUARE LETTER KA", 0x31, "Zanabazar_Square"),
    c(0x11A0C, None, "ZANABAZAR SQUARE LETTER KHA", 0x31, "Zanabazar_Square"),
    c(0x11A0D, None, "ZANABAZAR SQUARE LETTER GA", 0x31, "Zanabazar_Square"),
    c(0x11A0E, None, "ZANABAZAR SQUARE LETTER GHA", 0x31, "Zanabazar_Square"),
    c(0x11A0F, None, "ZANABAZAR SQUARE LETTER NGA", 0x31, "Zanabazar_Square"),
    c(0x11A10, None, "ZANABAZAR SQUARE LETTER CA", 0x31, "Zanabazar_Square"),
    c(0x11A11, None, "ZANABAZAR SQUARE LETTER CHA", 0x31, "Zanabazar_Square"),
    c(0x11A12, None, "ZANABAZAR SQUARE LETTER JA", 0x31, "Zanabazar_Square"),
    c(0x11A13, None, "ZANABAZAR SQUARE LETTER NYA", 0x31, "Zanabazar_Square"),
    c(0x11A14, None, "ZANABAZAR SQUARE LETTER TTA", 0x31, "Zanabazar_Square"),
    c(0x11A15, None, "ZANABAZAR SQUARE LETTER TTHA", 0x31, "Zanabazar_Square"),
    c(0x11A16, None, "ZANABAZAR SQUARE LETTER DDA", 0x31, "Zanabazar_Square"),
    c(0x11A17, None, "ZANABAZAR SQUARE LETTER DDHA", 0x31, "Zanabazar_Square"),
    c(0x11A18, None, "ZANABAZAR SQUARE LETTER NNA", 0x31, "Zanabazar_Square"),
    c(0x11A19, None, "ZANABAZAR SQUARE LETTER TA", 0x31, "Zanabazar_Square"),
    c(0x11A1A, None, "ZANABAZAR SQUARE LETTER THA", 0x31, "Zanabazar_Square"),
    c(0x11A1B, None, "ZANABAZAR SQUARE LETTER DA", 0x31, "Zanabazar_Square"),
    c(0x11A1C, None, "ZANABAZAR SQUARE LETTER DHA", 0x31, "Zanabazar_Square"),
    c(0x11A1D, None, "ZANABAZAR SQUARE LETTER NA", 0x31, "Zanabazar_Square"),
    c(0x11A1E, None, "ZANABAZAR SQUARE LETTER PA", 0x31, "Zanabazar_Square"),
    c(0x11A1F, None, "ZANABAZAR SQUARE LETTER PHA", 0x31, "Zanabazar_Square"),
    c(0x11A20, None, "ZANABAZAR SQUARE LETTER BA", 0x31, "Zanabazar_Square"),
    c(0x11A21, None, "ZANABAZAR SQUARE LETTER BHA", 0x31, "Zanabazar_Square"),
    c(0x11A22, None, "ZANABAZAR SQUARE LETTER MA", 0x31, "Zanabazar_Square"),
    c(0x11A23, None, "ZANABAZAR SQUARE LETTER TSA", 0x31, "Zanabazar_Square"),
    c(0x11A24, None, "ZANABAZAR SQUARE LETTER TSHA", 0x31, "Zanabazar_Square"),
    c(0x11A25, None, "ZANABAZAR SQUARE LETTER DZA", 0x31, "Zanabazar_Square"),
    c(0x11A26, None, "ZANABAZAR SQUARE LETTER DZHA", 0x31, "Zanabazar_Square"),
    c(0x11A27, None, "ZANABAZAR SQUARE LETTER ZHA", 0x31, "Zanabazar_Square"),
    c(0x11A28, None, "ZANABAZAR SQUARE LETTER ZA", 0x31, "Zanabazar_Square"),
    c(0x11A29, None, "ZANABAZAR SQUARE LETTER -A", 0x31, "Zanabazar_Square"),
    c(0x11A2A, None, "ZANABAZAR SQUARE LETTER YA", 0x31, "Zanabazar_Square"),
    c(0x11A2B, None, "ZANABAZAR SQUARE LETTER RA", 0x31, "Zanabazar_Square"),
    c(0x11A2C, None, "ZANABAZAR SQUARE LETTER LA", 0x31, "Zanabazar_Square"),
    c(0x11A2D, None, "ZANABAZAR SQUARE LETTER VA", 0x31, "Zanabazar_Square"),
    c(0x11A2E, None, "ZANABAZAR SQUARE LETTER SHA", 0x31, "Zanabazar_Square"),
    c(0x11A2F, None, "ZANABAZAR SQUARE LETTER SSA", 0x31, "Zanabazar_Square"),
    c(0x11A30, None, "ZANABAZAR SQUARE LETTER SA", 0x31, "Zanabazar_Square"),
    c(0x11A31, None, "ZANABAZAR SQUARE LETTER HA", 0x31, "Zanabazar_Square"),
    c(0x11A32, None, "ZANABAZAR SQUARE LETTER KSSA", 0x31, "Zanabazar_Square"),
    c(0x11A33, None, "ZANABAZAR SQUARE FINAL CONSONANT MARK", 0x20, "Zanabazar_Square"),
    c(0x11A34, None, "ZANABAZAR SQUARE SIGN VIRAMA", 0x20, "Zanabazar_Square"),
    c(0x11A35, None, "ZANABAZAR SQUARE SIGN CANDRABINDU", 0x21, "Zanabazar_Square"),
    c(0x11A36, None, "ZANABAZAR SQUARE SIGN CANDRABINDU WITH ORNAMENT", 0x21, "Zanabazar_Square"),
    c(0x11A37, None, "ZANABAZAR SQUARE SIGN CANDRA WITH ORNAMENT", 0x21, "Zanabazar_Square"),
    c(0x11A38, None, "ZANABAZAR SQUARE SIGN ANUSVARA", 0x21, "Zanabazar_Square"),
    c(0x11A39, None, "ZANABAZAR SQUARE SIGN VISARGA", 0x21, "Zanabazar_Square"),
    c(0x11A3A, None, "ZANABAZAR SQUARE CLUSTER-INITIAL LETTER RA", 0x31, "Zanabazar_Square"),
    c(0x11A3B, None, "ZANABAZAR SQUARE CLUSTER-FINAL LETTER YA", 0x21, "Zanabazar_Square"),
    c(0x11A3C, None, "ZANABAZAR SQUARE CLUSTER-FINAL LETTER RA", 0x21, "Zanabazar_Square"),
    c(0x11A3D, None, "ZANABAZAR SQUARE CLUSTER-FINAL LETTER LA", 0x21, "Zanabazar_Square"),
    c(0x11A3E, None, "ZANABAZAR SQUARE CLUSTER-FINAL LETTER VA", 0x21, "Zanabazar_Square"),
    c(0x11A3F, None, "ZANABAZAR SQUARE INITIAL HEAD MARK", 0x00, "Zanabazar_Square"),
    c(0x11A40, None, "ZANABAZAR SQUARE CLOSING HEAD MARK", 0x00, "Zanabazar_Square"),
    c(0x11A41, None, "ZANABAZAR SQUARE MARK TSHEG", 0x00, "Zanabazar_Square"),
    c(0x11A42, None, "ZANABAZAR SQUARE MARK SHAD", 0x00, "Zanabazar_Square"),
    c(0x11A43, None, "ZANABAZAR SQUARE MARK DOUBLE SHAD", 0x00, "Zanabazar_Square"),
    c(0x11A44, None, "ZANABAZAR SQUARE MARK LONG TSHEG", 0x00, "Zanabazar_Square"),
    c(0x11A45, None, "ZANABAZAR SQUARE INITIAL DOUBLE-LINED HEAD MARK", 0x00, "Zanabazar_Square"),
    c(0x11A46, None, "ZANABAZAR SQUARE CLOSING DOUBLE-LINED HEAD MARK", 0x00, "Zanabazar_Square"),
    c(0x11A47, None, "ZANABAZAR SQUARE SUBJOINER", 0x20, "Zanabazar_Square"),
    c(0x11A50, None, "SOYOMBO LETTER A", 0x31, "Soyombo"),
    c(0x11A51, None, "SOYOMBO VOWEL SIGN I", 0x21, "Soyombo"),
    c(0x11A52, None, "SOYOMBO VOWEL SIGN UE", 0x21, "Soyombo"),
    c(0x11A53, None, "SOYOMBO VOWEL SIGN U", 0x21, "Soyombo"),
    c(0x11A54, None, "SOYOMBO VOWEL SIGN E", 0x21, "Soyombo"),
    c(0x11A55, None, "SOYOMBO VOWEL SIGN O", 0x21, "Soyombo"),
    c(0x11A56, None, "SOYOMBO VOWEL SIGN OE", 0x21, "Soyombo"),
    c(0x11A57, None, "SOYOMBO VOWEL SIGN AI", 0x21, "Soyombo"),
    c(0x11A58, None, "SOYOMBO VOWEL SIGN AU", 0x21, "Soyombo"),
    c(0x11A59, None, "SOYOMBO VOWEL SIGN VOCALIC R", 0x21, "Soyombo"),
    c(0x11A5A, None, "SOYOMBO VOWEL SIGN VOCALIC L", 0x21, "Soyombo"),
    c(0x11A5B, None, "SOYOMBO VOWEL LENGTH MARK", 0x21, "Soyombo"),
    c(0x11A5C, None, "SOYOMBO LETTER KA", 0x31, "Soyombo"),
    c(0x11A5D, None, "SOYOMBO LETTER KHA", 0x31, "Soyombo"),
    c(0x11A5E, None, "SOYOMBO LETTER GA", 0x31, "Soyombo"),
    c(0x11A5F, None, "SOYOMBO LETTER GHA", 0x31, "Soyombo"),
    c(0x11A60, None, "SOYOMBO LETTER NGA", 0x31, "Soyombo"),
    c(0x11A61, None, "SOYOMBO LETTER CA", 0x31, "Soyombo"),
    c(0x11A62, None, "SOYOMBO LETTER CHA", 0x31, "Soyombo"),
    c(0x11A63, None, "SOYOMBO LETTER JA", 0x31, "Soyombo"),
    c(0x11A64, None, "SOYOMBO LETTER JHA", 0x31, "Soyombo"),
    c(0x11A65, None, "SOYOMBO LETTER NYA", 0x31, "Soyombo"),
    c(0x11A66, None, "SOYOMBO LETTER TTA", 0x31, "Soyombo"),
    c(0x11A67, None, "SOYOMBO LETTER TTHA", 0x31, "Soyombo"),
    c(0x11A68, None, "SOYOMBO LETTER DDA", 0x31, "Soyombo"),
    c(0x11A69, None, "SOYOMBO LETTER DDHA", 0x31, "Soyombo"),
    c(0x11A6A, None, "SOYOMBO LETTER NNA", 0x31, "Soyombo"),
    c(0x11A6B, None, "SOYOMBO LETTER TA", 0x31, "Soyombo"),
    c(0x11A6C, None, "SOYOMBO LETTER THA", 0x31, "Soyombo"),
    c(0x11A6D, None, "SOYOMBO LETTER DA", 0x31, "Soyombo"),
    c(0x11A6E, None, "SOYOMBO LETTER DHA", 0x31, "Soyombo"),
    c(0x11A6F, None, "SOYOMBO LETTER NA", 0x31, "Soyombo"),
    c(0x11A70, None, "SOYOMBO LETTER PA", 0x31, "Soyombo"),
    c(0x11A71, None, "SOYOMBO LETTER PHA", 0x31, "Soyombo"),
    c(0x11A72, None, "SOYOMBO LETTER BA", 0x31, "Soyombo"),
    c(0x11A73, None, "SOYOMBO LETTER BHA", 0x31, "Soyombo"),
    c(0x11A74, None, "SOYOMBO LETTER MA", 0x31, "Soyombo"),
    c(0x11A75, None, "SOYOMBO LETTER TSA", 0x31, "Soyombo"),
    c(0x11A76, None, "SOYOMBO LETTER TSHA", 0x31, "Soyombo"),
    c(0x11A77, None, "SOYOMBO LETTER DZA", 0x31, "Soyombo"),
    c(0x11A78, None, "SOYOMBO LETTER ZHA", 0x31, "Soyombo"),
    c(0x11A79, None, "SOYOMBO LETTER ZA", 0x31, "Soyombo"),
    c(0x11A7A, None, "SOYOMBO LETTER -A", 0x31, "Soyombo"),
    c(0x11A7B, None, "SOYOMBO LETTER YA", 0x31, "Soyombo"),
    c(0x11A7C, None, "SOYOMBO LETTER RA", 0x31, "Soyombo"),
    c(0x11A7D, None, "SOYOMBO LETTER LA", 0x31, "Soyombo"),
    c(0x11A7E, None, "SOYOMBO LETTER VA", 0x31, "Soyombo"),
    c(0x11A7F, None, "SOYOMBO LETTER SHA", 0x31, "Soyombo"),
    c(0x11A80, None, "SOYOMBO LETTER SSA", 0x31, "Soyombo"),
    c(0x11A81, None, "SOYOMBO LETTER SA", 0x31, "Soyombo"),
    c(0x11A82, None, "SOYOMBO LETTER HA", 0x31, "Soyombo"),
    c(0x11A83, None, "SOYOMBO LETTER KSSA", 0x31, "Soyombo"),
    c(0x11A84, None, "SOYOMBO SIGN JIHVAMULIYA", 0x31, "Soyombo"),
    c(0x11A85, None, "SOYOMBO SIGN UPADHMANIYA", 0x31, "Soyombo"),
    c(0x11A86, None, "SOYOMBO CLUSTER-INITIAL LETTER RA", 0x31, "Soyombo"),
    c(0x11A87, None, "SOYOMBO CLUSTER-INITIAL LETTER LA", 0x31, "Soyombo"),
    c(0x11A88, None, "SOYOMBO CLUSTER-INITIAL LETTER SHA", 0x31, "Soyombo"),
    c(0x11A89, None, "SOYOMBO CLUSTER-INITIAL LETTER SA", 0x31, "Soyombo"),
    c(0x11A8A, None, "SOYOMBO FINAL CONSONANT SIGN G", 0x21, "Soyombo"),
    c(0x11A8B, None, "SOYOMBO FINAL CONSONANT SIGN K", 0x21, "Soyombo"),
    c(0x11A8C, None, "SOYOMBO FINAL CONSONANT SIGN NG", 0x21, "Soyombo"),
    c(0x11A8D, None, "SOYOMBO FINAL CONSONANT SIGN D", 0x21, "Soyombo"),
    c(0x11A8E, None, "SOYOMBO FINAL CONSONANT SIGN N", 0x21, "Soyombo"),
    c(0x11A8F, None, "SOYOMBO FINAL CONSONANT SIGN B", 0x21, "Soyombo"),
    c(0x11A90, None, "SOYOMBO FINAL CONSONANT SIGN M", 0x21, "Soyombo"),
    c(0x11A91, None, "SOYOMBO FINAL CONSONANT SIGN R", 0x21, "Soyombo"),
    c(0x11A92, None, "SOYOMBO FINAL CONSONANT SIGN L", 0x21, "Soyombo"),
    c(0x11A93, None, "SOYOMBO FINAL CONSONANT SIGN SH", 0x21, "Soyombo"),
    c(0x11A94, None, "SOYOMBO FINAL CONSONANT SIGN S", 0x21, "Soyombo"),
    c(0x11A95, None, "SOYOMBO FINAL CONSONANT SIGN -A", 0x21, "Soyombo"),
    c(0x11A96, None, "SOYOMBO SIGN ANUSVARA", 0x21, "Soyombo"),
    c(0x11A97, None, "SOYOMBO SIGN VISARGA", 0x21, "Soyombo"),
    c(0x11A98, None, "SOYOMBO GEMINATION MARK", 0x20, "Soyombo"),
    c(0x11A99, None, "SOYOMBO SUBJOINER", 0x20, "Soyombo"),
    c(0x11A9A, None, "SOYOMBO MARK TSHEG", 0x00, "Soyombo"),
    c(0x11A9B, None, "SOYOMBO MARK SHAD", 0x00, "Soyombo"),
    c(0x11A9C, None, "SOYOMBO MARK DOUBLE SHAD", 0x00, "Soyombo"),
    c(0x11A9D, None, "SOYOMBO MARK PLUTA", 0x31, "Soyombo"),
    c(0x11A9E, None, "SOYOMBO HEAD MARK WITH MOON AND SUN AND TRIPLE FLAME", 0x00, "Soyombo"),
    c(0x11A9F, None, "SOYOMBO HEAD MARK WITH MOON AND SUN AND FLAME", 0x00, "Soyombo"),
    c(0x11AA0, None, "SOYOMBO HEAD MARK WITH MOON AND SUN", 0x00, "Soyombo"),
    c(0x11AA1, None, "SOYOMBO TERMINAL MARK-1", 0x00, "Soyombo"),
    c(0x11AA2, None, "SOYOMBO TERMINAL MARK-2", 0x00, "Soyombo"),
    c(0x11AB0, None, "CANADIAN SYLLABICS NATTILIK HI", 0x31, "UCAS_Ext_A"),
    c(0x11AB1, None, "CANADIAN SYLLABICS NATTILIK HII", 0x31, "UCAS_Ext_A"),
    c(0x11AB2, None, "CANADIAN SYLLABICS NATTILIK HO", 0x31, "UCAS_Ext_A"),
    c(0x11AB3, None, "CANADIAN SYLLABICS NATTILIK HOO", 0x31, "UCAS_Ext_A"),
    c(0x11AB4, None, "CANADIAN SYLLABICS NATTILIK HA", 0x31, "UCAS_Ext_A"),
    c(0x11AB5, None, "CANADIAN SYLLABICS NATTILIK HAA", 0x31, "UCAS_Ext_A"),
    c(0x11AB6, None, "CANADIAN SYLLABICS NATTILIK SHRI", 0x31, "UCAS_Ext_A"),
    c(0x11AB7, None, "CANADIAN SYLLABICS NATTILIK SHRII", 0x31, "UCAS_Ext_A"),
    c(0x11AB8, None, "CANADIAN SYLLABICS NATTILIK SHRO", 0x31, "UCAS_Ext_A"),
    c(0x11AB9, None, "CANADIAN SYLLABICS NATTILIK SHROO", 0x31, "UCAS_Ext_A"),
    c(0x11ABA, None, "CANADIAN SYLLABICS NATTILIK SHRA", 0x31, "UCAS_Ext_A"),
    c(0x11ABB, None, "CANADIAN SYLLABICS NATTILIK SHRAA", 0x31, "UCAS_Ext_A"),
    c(0x11ABC, None, "CANADIAN SYLLABICS SPE", 0x31, "UCAS_Ext_A"),
    c(0x11ABD, None, "CANADIAN SYLLABICS SPI", 0x31, "UCAS_Ext_A"),
    c(0x11ABE, None, "CANADIAN SYLLABICS SPO", 0x31, "UCAS_Ext_A"),
    c(0x11ABF, None, "CANADIAN SYLLABICS SPA", 0x31, "UCAS_Ext_A"),
    c(0x11AC0, None, "PAU CIN HAU LETTER PA", 0x31, "Pau_Cin_Hau"),
    c(0x11AC1, None, "PAU CIN HAU LETTER KA", 0x31, "Pau_Cin_Hau"),
    c(0x11AC2, None, "PAU CIN HAU LETTER LA", 0x31, "Pau_Cin_Hau"),
    c(0x11AC3, None, "PAU CIN HAU LETTER MA", 0x31, "Pau_Cin_Hau"),
    c(0x11AC4, None, "PAU CIN HAU LETTER DA", 0x31, "Pau_Cin_Hau"),
    c(0x11AC5, None, "PAU CIN HAU LETTER ZA", 0x31, "Pau_Cin_Hau"),
    c(0x11AC6, None, "PAU CIN HAU LETTER VA", 0x31, "Pau_Cin_Hau"),
    c(0x11AC7, None, "PAU CIN HAU LETTER NGA", 0x31, "Pau_Cin_Hau"),
    c(0x11AC8, None, "PAU CIN HAU LETTER HA", 0x31, "Pau_Cin_Hau"),
    c(0x11AC9, None, "PAU CIN HAU LETTER GA", 0x31, "Pau_Cin_Hau"),
    c(0x11ACA, None, "PAU CIN HAU LETTER KHA", 0x31, "Pau_Cin_Hau"),
    c(0x11ACB, None, "PAU CIN HAU LETTER SA", 0x31, "Pau_Cin_Hau"),
    c(0x11ACC, None, "PAU CIN HAU LETTER BA", 0x31, "Pau_Cin_Hau"),
    c(0x11ACD, None, "PAU CIN HAU LETTER CA", 0x31, "Pau_Cin_Hau"),
    c(0x11ACE, None, "PAU CIN HAU LETTER TA", 0x31, "Pau_Cin_Hau"),
    c(0x11ACF, None, "PAU CIN HAU LETTER THA", 0x31, "Pau_Cin_Hau"),
    c(0x11AD0, None, "PAU CIN HAU LETTER NA", 0x31, "Pau_Cin_Hau"),
    c(0x11AD1, None, "PAU CIN HAU LETTER PHA", 0x31, "Pau_Cin_Hau"),
    c(0x11AD2, None, "PAU CIN HAU LETTER RA", 0x31, "Pau_Cin_Hau"),
    c(0x11AD3, None, "PAU CIN HAU LETTER FA", 0x31, "Pau_Cin_Hau"),
    c(0x11AD4, None, "PAU CIN HAU LETTER CHA", 0x31, "Pau_Cin_Hau"),
    c(0x11AD5, None, "PAU CIN HAU LETTER A", 0x31, "Pau_Cin_Hau"),
    c(0x11AD6, None, "PAU CIN HAU LETTER E", 0x31, "Pau_Cin_Hau"),
    c(0x11AD7, None, "PAU CIN HAU LETTER I", 0x31, "Pau_Cin_Hau"),
    c(0x11AD8, None, "PAU CIN HAU LETTER O", 0x31, "Pau_Cin_Hau"),
    c(0x11AD9, None, "PAU CIN HAU LETTER U", 0x31, "Pau_Cin_Hau"),
    c(0x11ADA, None, "PAU CIN HAU LETTER UA", 0x31, "Pau_Cin_Hau"),
    c(0x11ADB, None, "PAU CIN HAU LETTER IA", 0x31, "Pau_Cin_Hau"),
    c(0x11ADC, None, "PAU CIN HAU LETTER FINAL P", 0x31, "Pau_Cin_Hau"),
    c(0x11ADD, None, "PAU CIN HAU LETTER FINAL K", 0x31, "Pau_Cin_Hau"),
    c(0x11ADE, None, "PAU CIN HAU LETTER FINAL T", 0x31, "Pau_Cin_Hau"),
    c(0x11ADF, None, "PAU CIN HAU LETTER FINAL M", 0x31, "Pau_Cin_Hau"),
    c(0x11AE0, None, "PAU CIN HAU LETTER FINAL N", 0x31, "Pau_Cin_Hau"),
    c(0x11AE1, None, "PAU CIN HAU LETTER FINAL L", 0x31, "Pau_Cin_Hau"),
    c(0x11AE2, None, "PAU CIN HAU LETTER FINAL W", 0x31, "Pau_Cin_Hau"),
    c(0x11AE3, None, "PAU CIN HAU LETTER FINAL NG", 0x31, "Pau_Cin_Hau"),
    c(0x11AE4, None, "PAU CIN HAU LETTER FINAL Y", 0x31, "Pau_Cin_Hau"),
    c(0x11AE5, None, "PAU CIN HAU RISING TONE LONG", 0x31, "Pau_Cin_Hau"),
    c(0x11AE6, None, "PAU CIN HAU RISING TONE", 0x31, "Pau_Cin_Hau"),
    c(0x11AE7, None, "PAU CIN HAU SANDHI GLOTTAL STOP", 0x31, "Pau_Cin_Hau"),
    c(0x11AE8, None, "PAU CIN HAU RISING TONE LONG FINAL", 0x31, "Pau_Cin_Hau"),
    c(0x11AE9, None, "PAU CIN HAU RISING TONE FINAL", 0x31, "Pau_Cin_Hau"),
    c(0x11AEA, None, "PAU CIN HAU SANDHI GLOTTAL STOP FINAL", 0x31, "Pau_Cin_Hau"),
    c(0x11AEB, None, "PAU CIN HAU SANDHI TONE LONG", 0x31, "Pau_Cin_Hau"),
    c(0x11AEC, None, "PAU CIN HAU SANDHI TONE", 0x31, "Pau_Cin_Hau"),
    c(0x11AED, None, "PAU CIN HAU SANDHI TONE LONG FINAL", 0x31, "Pau_Cin_Hau"),
    c(0x11AEE, None, "PAU CIN HAU SANDHI TONE FINAL", 0x31, "Pau_Cin_Hau"),
    c(0x11AEF, None, "PAU CIN HAU MID-LEVEL TONE", 0x31, "Pau_Cin_Hau"),
    c(0x11AF0, None, "PAU CIN HAU GLOTTAL STOP VARIANT", 0x31, "Pau_Cin_Hau"),
    c(0x11AF1, None, "PAU CIN HAU MID-LEVEL TONE LONG FINAL", 0x31, "Pau_Cin_Hau"),
    c(0x11AF2, None, "PAU CIN HAU MID-LEVEL TONE FINAL", 0x31, "Pau_Cin_Hau"),
    c(0x11AF3, None, "PAU CIN HAU LOW-FALLING TONE LONG", 0x31, "Pau_Cin_Hau"),
    c(0x11AF4, None, "PAU CIN HAU LOW-FALLING TONE", 0x31, "Pau_Cin_Hau"),
    c(0x11AF5, None, "PAU CIN HAU GLOTTAL STOP", 0x31, "Pau_Cin_Hau"),
    c(0x11AF6, None, "PAU CIN HAU LOW-FALLING TONE LONG FINAL", 0x31, "Pau_Cin_Hau"),
    c(0x11AF7, None, "PAU CIN HAU LOW-FALLING TONE FINAL", 0x31, "Pau_Cin_Hau"),
    c(0x11AF8, None, "PAU CIN HAU GLOTTAL STOP FINAL", 0x31, "Pau_Cin_Hau"),
    c(0x11C00, None, "BHAIKSUKI LETTER A", 0x31, "Bhaiksuki"),
    c(0x11C01, None, "BHAIKSUKI LETTER AA", 0x31, "Bhaiksuki"),
    c(0x11C02, None, "BHAIKSUKI LETTER I", 0x31, "Bhaiksuki"),
    c(0x11C03, None, "BHAIKSUKI LETTER II", 0x31, "Bhaiksuki"),
    c(0x11C04, None, "BHAIKSUKI LETTER U", 0x31, "Bhaiksuki"),
    c(0x11C05, None, "BHAIKSUKI LETTER UU", 0x31, "Bhaiksuki"),
    c(0x11C06, None, "BHAIKSUKI LETTER VOCALIC R", 0x31, "Bhaiksuki"),
    c(0x11C07, None, "BHAIKSUKI LETTER VOCALIC RR", 0x31, "Bhaiksuki"),
    c(0x11C08, None, "BHAIKSUKI LETTER VOCALIC L", 0x31, "Bhaiksuki"),
    c(0x11C0A, None, "BHAIKSUKI LETTER E", 0x31, "Bhaiksuki"),
    c(0x11C0B, None, "BHAIKSUKI LETTER AI", 0x31, "Bhaiksuki"),
    c(0x11C0C, None, "BHAIKSUKI LETTER O", 0x31, "Bhaiksuki"),
    c(0x11C0D, None, "BHAIKSUKI LETTER AU", 0x31, "Bhaiksuki"),
    c(0x11C0E, None, "BHAIKSUKI LETTER KA", 0x31, "Bhaiksuki"),
    c(0x11C0F, None, "BHAIKSUKI LETTER KHA", 0x31, "Bhaiksuki"),
    c(0x11C10, None, "BHAIKSUKI LETTER GA", 0x31, "Bhaiksuki"),
    c(0x11C11, None, "BHAIKSUKI LETTER GHA", 0x31, "Bhaiksuki"),
    c(0x11C12, None, "BHAIKSUKI LETTER NGA", 0x31, "Bhaiksuki"),
    c(0x11C13, None, "BHAIKSUKI LETTER CA", 0x31, "Bhaiksuki"),
    c(0x11C14, None, "BHAIKSUKI LETTER CHA", 0x31, "Bhaiksuki"),
    c(0x11C15, None, "BHAIKSUKI LETTER JA", 0x31, "Bhaiksuki"),
    c(0x11C16, None, "BHAIKSUKI LETTER JHA", 0x31, "Bhaiksuki"),
    c(0x11C17, None, "BHAIKSUKI LETTER NYA", 0x31, "Bhaiksuki"),
    c(0x11C18, None, "BHAIKSUKI LETTER TTA", 0x31, "Bhaiksuki"),
    c(0x11C19, None, "BHAIKSUKI LETTER TTHA", 0x31, "Bhaiksuki"),
    c(0x11C1A, None, "BHAIKSUKI LETTER DDA", 0x31, "Bhaiksuki"),
    c(0x11C1B, None, "BHAIKSUKI LETTER DDHA", 0x31, "Bhaiksuki"),
    c(0x11C1C, None, "BHAIKSUKI LETTER NNA", 0x31, "Bhaiksuki"),
    c(0x11C1D, None, "BHAIKSUKI LETTER TA", 0x31, "Bhaiksuki"),
    c(0x11C1E, None, "BHAIKSUKI LETTER THA", 0x31, "Bhaiksuki"),
    c(0x11C1F, None, "BHAIKSUKI LETTER DA", 0x31, "Bhaiksuki"),
    c(0x11C20, None, "BHAIKSUKI LETTER DHA", 0x31, "Bhaiksuki"),
    c(0x11C21, None, "BHAIKSUKI LETTER NA", 0x31, "Bhaiksuki"),
    c(0x11C22, None, "BHAIKSUKI LETTER PA", 0x31, "Bhaiksuki"),
    c(0x11C23, None, "BHAIKSUKI LETTER PHA", 0x31, "Bhaiksuki"),
    c(0x11C24, None, "BHAIKSUKI LETTER BA", 0x31, "Bhaiksuki"),
    c(0x11C25, None, "BHAIKSUKI LETTER BHA", 0x31, "Bhaiksuki"),
    c(0x11C26, None, "BHAIKSUKI LETTER MA", 0x31, "Bhaiksuki"),
    c(0x11C27, None, "BHAIKSUKI LETTER YA", 0x31, "Bhaiksuki"),
    c(0x11C28, None, "BHAIKSUKI LETTER RA", 0x31, "Bhaiksuki"),
    c(0x11C29, None, "BHAIKSUKI LETTER LA", 0x31, "Bhaiksuki"),
    c(0x11C2A, None, "BHAIKSUKI LETTER VA", 0x31, "Bhaiksuki"),
    c(0x11C2B, None, "BHAIKSUKI LETTER SHA", 0x31, "Bhaiksuki"),
    c(0x11C2C, None, "BHAIKSUKI LETTER SSA", 0x31, "Bhaiksuki"),
    c(0x11C2D, None, "BHAIKSUKI LETTER SA", 0x31, "Bhaiksuki"),
    c(0x11C2E, None, "BHAIKSUKI LETTER HA", 0x31, "Bhaiksuki"),
    c(0x11C2F, None, "BHAIKSUKI VOWEL SIGN AA", 0x21, "Bhaiksuki"),
    c(0x11C30, None, "BHAIKSUKI VOWEL SIGN I", 0x21, "Bhaiksuki"),
    c(0x11C31, None, "BHAIKSUKI VOWEL SIGN II", 0x21, "Bhaiksuki"),
    c(0x11C32, None, "BHAIKSUKI VOWEL SIGN U", 0x21, "Bhaiksuki"),
    c(0x11C33, None, "BHAIKSUKI VOWEL SIGN UU", 0x21, "Bhaiksuki"),
    c(0x11C34, None, "BHAIKSUKI VOWEL SIGN VOCALIC R", 0x21, "Bhaiksuki"),
    c(0x11C35, None, "BHAIKSUKI VOWEL SIGN VOCALIC RR", 0x21, "Bhaiksuki"),
    c(0x11C36, None, "BHAIKSUKI VOWEL SIGN VOCALIC L", 0x21, "Bhaiksuki"),
    c(0x11C38, None, "BHAIKSUKI VOWEL SIGN E", 0x21, "Bhaiksuki"),
    c(0x11C39, None, "BHAIKSUKI VOWEL SIGN AI", 0x21, "Bhaiksuki"),
    c(0x11C3A, None, "BHAIKSUKI VOWEL SIGN O", 0x21, "Bhaiksuki"),
    c(0x11C3B, None, "BHAIKSUKI VOWEL SIGN AU", 0x21, "Bhaiksuki"),
    c(0x11C3C, None, "BHAIKSUKI SIGN CANDRABINDU", 0x21, "Bhaiksuki"),
    c(0x11C3D, None, "BHAIKSUKI SIGN ANUSVARA", 0x21, "Bhaiksuki"),
    c(0x11C3E, None, "BHAIKSUKI SIGN VISARGA", 0x21, "Bhaiksuki"),
    c(0x11C3F, None, "BHAIKSUKI SIGN VIRAMA", 0x20, "Bhaiksuki"),
    c(0x11C40, None, "BHAIKSUKI SIGN AVAGRAHA", 0x31, "Bhaiksuki"),
    c(0x11C41, None, "BHAIKSUKI DANDA", 0x00, "Bhaiksuki"),
    c(0x11C42, None, "BHAIKSUKI DOUBLE DANDA", 0x00, "Bhaiksuki"),
    c(0x11C43, None, "BHAIKSUKI WORD SEPARATOR", 0x00, "Bhaiksuki"),
    c(0x11C44, None, "BHAIKSUKI GAP FILLER-1", 0x00, "Bhaiksuki"),
    c(0x11C45, None, "BHAIKSUKI GAP FILLER-2", 0x00, "Bhaiksuki"),
    c(0x11C50, None, "BHAIKSUKI DIGIT ZERO", 0x20, "Bhaiksuki"),
    c(0x11C51, None, "BHAIKSUKI DIGIT ONE", 0x20, "Bhaiksuki"),
    c(0x11C52, None, "BHAIKSUKI DIGIT TWO", 0x20, "Bhaiksuki"),
    c(0x11C53, None, "BHAIKSUKI DIGIT THREE", 0x20, "Bhaiksuki"),
    c(0x11C54, None, "BHAIKSUKI DIGIT FOUR", 0x20, "Bhaiksuki"),
    c(0x11C55, None, "BHAIKSUKI DIGIT FIVE", 0x20, "Bhaiksuki"),
    c(0x11C56, None, "BHAIKSUKI DIGIT SIX", 0x20, "Bhaiksuki"),
    c(0x11C57, None, "BHAIKSUKI DIGIT SEVEN", 0x20, "Bhaiksuki"),
    c(0x11C58, None, "BHAIKSUKI DIGIT EIGHT", 0x20, "Bhaiksuki"),
    c(0x11C59, None, "BHAIKSUKI DIGIT NINE", 0x20, "Bhaiksuki"),
    c(0x11C5A, None, "BHAIKSUKI NUMBER ONE", 0x00, "Bhaiksuki"),
    c(0x11C5B, None, "BHAIKSUKI NUMBER TWO", 0x00, "Bhaiksuki"),
    c(0x11C5C, None, "BHAIKSUKI NUMBER THREE", 0x00, "Bhaiksuki"),
    c(0x11C5D, None, "BHAIKSUKI NUMBER FOUR", 0x00, "Bhaiksuki"),
    c(0x11C5E, None, "BHAIKSUKI NUMBER FIVE", 0x00, "Bhaiksuki"),
    c(0x11C5F, None, "BHAIKSUKI NUMBER SIX", 0x00, "Bhaiksuki"),
    c(0x11C60, None, "BHAIKSUKI NUMBER SEVEN", 0x00, "Bhaiksuki"),
    c(0x11C61, None, "BHAIKSUKI NUMBER EIGHT", 0x00, "Bhaiksuki"),
    c(0x11C62, None, "BHAIKSUKI NUMBER NINE", 0x00, "Bhaiksuki"),
    c(0x11C63, None, "BHAIKSUKI NUMBER TEN", 0x00, "Bhaiksuki"),
    c(0x11C64, None, "BHAIKSUKI NUMBER TWENTY", 0x00, "Bhaiksuki"),
    c(0x11C65, None, "BHAIKSUKI NUMBER THIRTY", 0x00, "Bhaiksuki"),
    c(0x11C66, None, "BHAIKSUKI NUMBER FORTY", 0x00, "Bhaiksuki"),
    c(0x11C67, None, "BHAIKSUKI NUMBER FIFTY", 0x00, "Bhaiksuki"),
    c(0x11C68, None, "BHAIKSUKI NUMBER SIXTY", 0x00, "Bhaiksuki"),
    c(0x11C69, None, "BHAIKSUKI NUMBER SEVENTY", 0x00, "Bhaiksuki"),
    c(0x11C6A, None, "BHAIKSUKI NUMBER EIGHTY", 0x00, "Bhaiksuki"),
    c(0x11C6B, None, "BHAIKSUKI NUMBER NINETY", 0x00, "Bhaiksuki"),
    c(0x11C6C, None, "BHAIKSUKI HUNDREDS UNIT MARK", 0x00, "Bhaiksuki"),
    c(0x11C70, None, "MARCHEN HEAD MARK", 0x00, "Marchen"),
    c(0x11C71, None, "MARCHEN MARK SHAD", 0x00, "Marchen"),
    c(0x11C72, None, "MARCHEN LETTER KA", 0x31, "Marchen"),
    c(0x11C73, None, "MARCHEN LETTER KHA", 0x31, "Marchen"),
    c(0x11C74, None, "MARCHEN LETTER GA", 0x31, "Marchen"),
    c(0x11C75, None, "MARCHEN LETTER NGA", 0x31, "Marchen"),
    c(0x11C76, None, "MARCHEN LETTER CA", 0x31, "Marchen"),
    c(0x11C77, None, "MARCHEN LETTER CHA", 0x31, "Marchen"),
    c(0x11C78, None, "MARCHEN LETTER JA", 0x31, "Marchen"),
    c(0x11C79, None, "MARCHEN LETTER NYA", 0x31, "Marchen"),
    c(0x11C7A, None, "MARCHEN LETTER TA", 0x31, "Marchen"),
    c(0x11C7B, None, "MARCHEN LETTER THA", 0x31, "Marchen"),
    c(0x11C7C, None, "MARCHEN LETTER DA", 0x31, "Marchen"),
    c(0x11C7D, None, "MARCHEN LETTER NA", 0x31, "Marchen"),
    c(0x11C7E, None, "MARCHEN LETTER PA", 0x31, "Marchen"),
    c(0x11C7F, None, "MARCHEN LETTER PHA", 0x31, "Marchen"),
    c(0x11C80, None, "MARCHEN LETTER BA", 0x31, "Marchen"),
    c(0x11C81, None, "MARCHEN LETTER MA", 0x31, "Marchen"),
    c(0x11C82, None, "MARCHEN LETTER TSA", 0x31, "Marchen"),
    c(0x11C83, None, "MARCHEN LETTER TSHA", 0x31, "Marchen"),
    c(0x11C84, None, "MARCHEN LETTER DZA", 0x31, "Marchen"),
    c(0x11C85, None, "MARCHEN LETTER WA", 0x31, "Marchen"),
    c(0x11C86, None, "MARCHEN LETTER ZHA", 0x31, "Marchen"),
    c(0x11C87, None, "MARCHEN LETTER ZA", 0x31, "Marchen"),
    c(0x11C88, None, "MARCHEN LETTER -A", 0x31, "Marchen"),
    c(0x11C89, None, "MARCHEN LETTER YA", 0x31, "Marchen"),
    c(0x11C8A, None, "MARCHEN LETTER RA", 0x31, "Marchen"),
    c(0x11C8B, None, "MARCHEN LETTER LA", 0x31, "Marchen"),
    c(0x11C8C, None, "MARCHEN LETTER SHA", 0x31, "Marchen"),
    c(0x11C8D, None, "MARCHEN LETTER SA", 0x31, "Marchen"),
    c(0x11C8E, None, "MARCHEN LETTER HA", 0x31, "Marchen"),
    c(0x11C8F, None, "MARCHEN LETTER A", 0x31, "Marchen"),
    c(0x11C92, None, "MARCHEN SUBJOINED LETTER KA", 0x21, "Marchen"),
    c(0x11C93, None, "MARCHEN SUBJOINED LETTER KHA", 0x21, "Marchen"),
    c(0x11C94, None, "MARCHEN SUBJOINED LETTER GA", 0x21, "Marchen"),
    c(0x11C95, None, "MARCHEN SUBJOINED LETTER NGA", 0x21, "Marchen"),
    c(0x11C96, None, "MARCHEN SUBJOINED LETTER CA", 0x21, "Marchen"),
    c(0x11C97, None, "MARCHEN SUBJOINED LETTER CHA", 0x21, "Marchen"),
    c(0x11C98, None, "MARCHEN SUBJOINED LETTER JA", 0x21, "Marchen"),
    c(0x11C99, None, "MARCHEN SUBJOINED LETTER NYA", 0x21, "Marchen"),
    c(0x11C9A, None, "MARCHEN SUBJOINED LETTER TA", 0x21, "Marchen"),
    c(0x11C9B, None, "MARCHEN SUBJOINED LETTER THA", 0x21, "Marchen"),
    c(0x11C9C, None, "MARCHEN SUBJOINED LETTER DA", 0x21, "Marchen"),
    c(0x11C9D, None, "MARCHEN SUBJOINED LETTER NA", 0x21, "Marchen"),
    c(0x11C9E, None, "MARCHEN SUBJOINED LETTER PA", 0x21, "Marchen"),
    c(0x11C9F, None, "MARCHEN SUBJOINED LETTER PHA", 0x21, "Marchen"),
    c(0x11CA0, None, "MARCHEN SUBJOINED LETTER BA", 0x21, "Marchen"),
    c(0x11CA1, None, "MARCHEN SUBJOINED LETTER MA", 0x21, "Marchen"),
    c(0x11CA2, None, "MARCHEN SUBJOINED LETTER TSA", 0x21, "Marchen"),
    c(0x11CA3, None, "MARCHEN SUBJOINED LETTER TSHA", 0x21, "Marchen"),
    c(0x11CA4, None, "MARCHEN SUBJOINED LETTER DZA", 0x21, "Marchen"),
    c(0x11CA5, None, "MARCHEN SUBJOINED LETTER WA", 0x21, "Marchen"),
    c(0x11CA6, None, "MARCHEN SUBJOINED LETTER ZHA", 0x21, "Marchen"),
    c(0x11CA7, None, "MARCHEN SUBJOINED LETTER ZA", 0x21, "Marchen"),
    c(0x11CA9, None, "MARCHEN SUBJOINED LETTER YA", 0x21, "Marchen"),
    c(0x11CAA, None, "MARCHEN SUBJOINED LETTER RA", 0x21, "Marchen"),
    c(0x11CAB, None, "MARCHEN SUBJOINED LETTER LA", 0x21, "Marchen"),
    c(0x11CAC, None, "MARCHEN SUBJOINED LETTER SHA", 0x21, "Marchen"),
    c(0x11CAD, None, "MARCHEN SUBJOINED LETTER SA", 0x21, "Marchen"),
    c(0x11CAE, None, "MARCHEN SUBJOINED LETTER HA", 0x21, "Marchen"),
    c(0x11CAF, None, "MARCHEN SUBJOINED LETTER A", 0x21, "Marchen"),
    c(0x11CB0, None, "MARCHEN VOWEL SIGN AA", 0x21, "Marchen"),
    c(0x11CB1, None, "MARCHEN VOWEL SIGN I", 0x21, "Marchen"),
    c(0x11CB2, None, "MARCHEN VOWEL SIGN U", 0x21, "Marchen"),
    c(0x11CB3, None, "MARCHEN VOWEL SIGN E", 0x21, "Marchen"),
    c(0x11CB4, None, "MARCHEN VOWEL SIGN O", 0x21, "Marchen"),
    c(0x11CB5, None, "MARCHEN SIGN ANUSVARA", 0x21, "Marchen"),
    c(0x11CB6, None, "MARCHEN SIGN CANDRABINDU", 0x21, "Marchen"),
    c(0x11D00, None, "MASARAM GONDI LETTER A", 0x31, "Masaram_Gondi"),
    c(0x11D01, None, "MASARAM GONDI LETTER AA", 0x31, "Masaram_Gondi"),
    c(0x11D02, None, "MASARAM GONDI LETTER I", 0x31, "Masaram_Gondi"),
    c(0x11D03, None, "MASARAM GONDI LETTER II", 0x31, "Masaram_Gondi"),
    c(0x11D04, None, "MASARAM GONDI LETTER U", 0x31, "Masaram_Gondi"),
    c(0x11D05, None, "MASARAM GONDI LETTER UU", 0x31, "Masaram_Gondi"),
    c(0x11D06, None, "MASARAM GONDI LETTER E", 0x31, "Masaram_Gondi"),
    c(0x11D08, None, "MASARAM GONDI LETTER AI", 0x31, "Masaram_Gondi"),
    c(0x11D09, None, "MASARAM GONDI LETTER O", 0x31, "Masaram_Gondi"),
    c(0x11D0B, None, "MASARAM GONDI LETTER AU", 0x31, "Masaram_Gondi"),
    c(0x11D0C, None, "MASARAM GONDI LETTER KA", 0x31, "Masaram_Gondi"),
    c(0x11D0D, None, "MASARAM GONDI LETTER KHA", 0x31, "Masaram_Gondi"),
    c(0x11D0E, None, "MASARAM GONDI LETTER GA", 0x31, "Masaram_Gondi"),
    c(0x11D0F, None, "MASARAM GONDI LETTER GHA", 0x31, "Masaram_Gondi"),
    c(0x11D10, None, "MASARAM GONDI LETTER NGA", 0x31, "Masaram_Gondi"),
    c(0x11D11, None, "MASARAM GONDI LETTER CA", 0x31, "Masaram_Gondi"),
    c(0x11D12, None, "MASARAM GONDI LETTER CHA", 0x31, "Masaram_Gondi"),
    c(0x11D13, None, "MASARAM GONDI LETTER JA", 0x31, "Masaram_Gondi"),
    c(0x11D14, None, "MASARAM GONDI LETTER JHA", 0x31, "Masaram_Gondi"),
    c(0x11D15, None, "MASARAM GONDI LETTER NYA", 0x31, "Masaram_Gondi"),
    c(0x11D16, None, "MASARAM GONDI LETTER TTA", 0x31, "Masaram_Gondi"),
    c(0x11D17, None, "MASARAM GONDI LETTER TTHA", 0x31, "Masaram_Gondi"),
    c(0x11D18, None, "MASARAM GONDI LETTER DDA", 0x31, "Masaram_Gondi"),
    c(0x11D19, None, "MASARAM GONDI LETTER DDHA", 0x31, "Masaram_Gondi"),
    c(0x11D1A, None, "MASARAM GONDI LETTER NNA", 0x31, "Masaram_Gondi"),
    c(0x11D1B, None, "MASARAM GONDI LETTER TA", 0x31, "Masaram_Gondi"),
    c(0x11D1C, None, "MASARAM GONDI LETTER THA", 0x31, "Masaram_Gondi"),
    c(0x11D1D, None, "MASARAM GONDI LETTER DA", 0x31, "Masaram_Gondi"),
    c(0x11D1E, None, "MASARAM GONDI LETTER DHA", 0x31, "Masaram_Gondi"),
    c(0x11D1F, None, "MASARAM GONDI LETTER NA", 0x31, "Masaram_Gondi"),
    c(0x11D20, None, "MASARAM GONDI LETTER PA", 0x31, "Masaram_Gondi"),
    c(0x11D21, None, "MASARAM GONDI LETTER PHA", 0x31, "Masaram_Gondi"),
    c(0x11D22, None, "MASARAM GONDI LETTER BA", 0x31, "Masaram_Gondi"),
    c(0x11D23, None, "MASARAM GONDI LETTER BHA", 0x31, "Masaram_Gondi"),
    c(0x11D24, None, "MASARAM GONDI LETTER MA", 0x31, "Masaram_Gondi"),
    c(0x11D25, None, "MASARAM GONDI LETTER YA", 0x31, "Masaram_Gondi"),
    c(0x11D26, None, "MASARAM GONDI LETTER RA", 0x31, "Masaram_Gondi"),
    c(0x11D27, None, "MASARAM GONDI LETTER LA", 0x31, "Masaram_Gondi"),
    c(0x11D28, None, "MASARAM GONDI LETTER VA", 0x31, "Masaram_Gondi"),
    c(0x11D29, None, "MASARAM GONDI LETTER SHA", 0x31, "Masaram_Gondi"),
    c(0x11D2A, None, "MASARAM GONDI LETTER SSA", 0x31, "Masaram_Gondi"),
    c(0x11D2B, None, "MASARAM GONDI LETTER SA", 0x31, "Masaram_Gondi"),
    c(0x11D2C, None, "MASARAM GONDI LETTER HA", 0x31, "Masaram_Gondi"),
    c(0x11D2D, None, "MASARAM GONDI LETTER LLA", 0x31, "Masaram_Gondi"),
    c(0x11D2E, None, "MASARAM GONDI LETTER KSSA", 0x31, "Masaram_Gondi"),
    c(0x11D2F, None, "MASARAM GONDI LETTER JNYA", 0x31, "Masaram_Gondi"),
    c(0x11D30, None, "MASARAM GONDI LETTER TRA", 0x31, "Masaram_Gondi"),
    c(0x11D31, None, "MASARAM GONDI VOWEL SIGN AA", 0x21, "Masaram_Gondi"),
    c(0x11D32, None, "MASARAM GONDI VOWEL SIGN I", 0x21, "Masaram_Gondi"),
    c(0x11D33, None, "MASARAM GONDI VOWEL SIGN II", 0x21, "Masaram_Gondi"),
    c(0x11D34, None, "MASARAM GONDI VOWEL SIGN U", 0x21, "Masaram_Gondi"),
    c(0x11D35, None, "MASARAM GONDI VOWEL SIGN UU", 0x21, "Masaram_Gondi"),
    c(0x11D36, None, "MASARAM GONDI VOWEL SIGN VOCALIC R", 0x21, "Masaram_Gondi"),
    c(0x11D3A, None, "MASARAM GONDI VOWEL SIGN E", 0x21, "Masaram_Gondi"),
    c(0x11D3C, None, "MASARAM GONDI VOWEL SIGN AI", 0x21, "Masaram_Gondi"),
    c(0x11D3D, None, "MASARAM GONDI VOWEL SIGN O", 0x21, "Masaram_Gondi"),
    c(0x11D3F, None, "MASARAM GONDI VOWEL SIGN AU", 0x21, "Masaram_Gondi"),
    c(0x11D40, None, "MASARAM GONDI SIGN ANUSVARA", 0x21, "Masaram_Gondi"),
    c(0x11D41, None, "MASARAM GONDI SIGN VISARGA", 0x21, "Masaram_Gondi"),
    c(0x11D42, None, "MASARAM GONDI SIGN NUKTA", 0x20, "Masaram_Gondi"),
    c(0x11D43, None, "MASARAM GONDI SIGN CANDRA", 0x21, "Masaram_Gondi"),
    c(0x11D44, None, "MASARAM GONDI SIGN HALANTA", 0x20, "Masaram_Gondi"),
    c(0x11D45, None, "MASARAM GONDI VIRAMA", 0x20, "Masaram_Gondi"),
    c(0x11D46, None, "MASARAM GONDI REPHA", 0x31, "Masaram_Gondi"),
    c(0x11D47, None, "MASARAM GONDI RA-KARA", 0x21, "Masaram_Gondi"),
    c(0x11D50, None, "MASARAM GONDI DIGIT ZERO", 0x20, "Masaram_Gondi"),
    c(0x11D51, None, "MASARAM GONDI DIGIT ONE", 0x20, "Masaram_Gondi"),
    c(0x11D52, None, "MASARAM GONDI DIGIT TWO", 0x20, "Masaram_Gondi"),
    c(0x11D53, None, "MASARAM GONDI DIGIT THREE", 0x20, "Masaram_Gondi"),
    c(0x11D54, None, "MASARAM GONDI DIGIT FOUR", 0x20, "Masaram_Gondi"),
    c(0x11D55, None, "MASARAM GONDI DIGIT FIVE", 0x20, "Masaram_Gondi"),
    c(0x11D56, None, "MASARAM GONDI DIGIT SIX", 0x20, "Masaram_Gondi"),
    c(0x11D57, None, "MASARAM GONDI DIGIT SEVEN", 0x20, "Masaram_Gondi"),
    c(0x11D58, None, "MASARAM GONDI DIGIT EIGHT", 0x20, "Masaram_Gondi"),
    c(0x11D59, None, "MASARAM GONDI DIGIT NINE", 0x20, "Masaram_Gondi"),
    c(0x11D60, None, "GUNJALA GONDI LETTER A", 0x31, "Gunjala_Gondi"),
    c(0x11D61, None, "GUNJALA GONDI LETTER AA", 0x31, "Gunjala_Gondi"),
    c(0x11D62, None, "GUNJALA GONDI LETTER I", 0x31, "Gunjala_Gondi"),
    c(0x11D63, None, "GUNJALA GONDI LETTER II", 0x31, "Gunjala_Gondi"),
    c(0x11D64, None, "GUNJALA GONDI LETTER U", 0x31, "Gunjala_Gondi"),
    c(0x11D65, None, "GUNJALA GONDI LETTER UU", 0x31, "Gunjala_Gondi"),
    c(0x11D67, None, "GUNJALA GONDI LETTER EE", 0x31, "Gunjala_Gondi"),
    c(0x11D68, None, "GUNJALA GONDI LETTER AI", 0x31, "Gunjala_Gondi"),
    c(0x11D6A, None, "GUNJALA GONDI LETTER OO", 0x31, "Gunjala_Gondi"),
    c(0x11D6B, None, "GUNJALA GONDI LETTER AU", 0x31, "Gunjala_Gondi"),
    c(0x11D6C, None, "GUNJALA GONDI LETTER YA", 0x31, "Gunjala_Gondi"),
    c(0x11D6D, None, "GUNJALA GONDI LETTER VA", 0x31, "Gunjala_Gondi"),
    c(0x11D6E, None, "GUNJALA GONDI LETTER BA", 0x31, "Gunjala_Gondi"),
    c(0x11D6F, None, "GUNJALA GONDI LETTER BHA", 0x31, "Gunjala_Gondi"),
    c(0x11D70, None, "GUNJALA GONDI LETTER MA", 0x31, "Gunjala_Gondi"),
    c(0x11D71, None, "GUNJALA GONDI LETTER KA", 0x31, "Gunjala_Gondi"),
    c(0x11D72, None, "GUNJALA GONDI LETTER KHA", 0x31, "Gunjala_Gondi"),
    c(0x11D73, None, "GUNJALA GONDI LETTER TA", 0x31, "Gunjala_Gondi"),
    c(0x11D74, None, "GUNJALA GONDI LETTER THA", 0x31, "Gunjala_Gondi"),
    c(0x11D75, None, "GUNJALA GONDI LETTER LA", 0x31, "Gunjala_Gondi"),
    c(0x11D76, None, "GUNJALA GONDI LETTER GA", 0x31, "Gunjala_Gondi"),
    c(0x11D77, None, "GUNJALA GONDI LETTER GHA", 0x31, "Gunjala_Gondi"),
    c(0x11D78, None, "GUNJALA GONDI LETTER DA", 0x31, "Gunjala_Gondi"),
    c(0x11D79, None, "GUNJALA GONDI LETTER DHA", 0x31, "Gunjala_Gondi"),
    c(0x11D7A, None, "GUNJALA GONDI LETTER NA", 0x31, "Gunjala_Gondi"),
    c(0x11D7B, None, "GUNJALA GONDI LETTER CA", 0x31, "Gunjala_Gondi"),
    c(0x11D7C, None, "GUNJALA GONDI LETTER CHA", 0x31, "Gunjala_Gondi"),
    c(0x11D7D, None, "GUNJALA GONDI LETTER TTA", 0x31, "Gunjala_Gondi"),
    c(0x11D7E, None, "GUNJALA GONDI LETTER TTHA", 0x31, "Gunjala_Gondi"),
    c(0x11D7F, None, "GUNJALA GONDI LETTER LLA", 0x31, "Gunjala_Gondi"),
    c(0x11D80, None, "GUNJALA GONDI LETTER JA", 0x31, "Gunjala_Gondi"),
    c(0x11D81, None, "GUNJALA GONDI LETTER JHA", 0x31, "Gunjala_Gondi"),
    c(0x11D82, None, "GUNJALA GONDI LETTER DDA", 0x31, "Gunjala_Gondi"),
    c(0x11D83, None, "GUNJALA GONDI LETTER DDHA", 0x31, "Gunjala_Gondi"),
    c(0x11D84, None, "GUNJALA GONDI LETTER NGA", 0x31, "Gunjala_Gondi"),
    c(0x11D85, None, "GUNJALA GONDI LETTER PA", 0x31, "Gunjala_Gondi"),
    c(0x11D86, None, "GUNJALA GONDI LETTER PHA", 0x31, "Gunjala_Gondi"),
    c(0x11D87, None, "GUNJALA GONDI LETTER HA", 0x31, "Gunjala_Gondi"),
    c(0x11D88, None, "GUNJALA GONDI LETTER RA", 0x31, "Gunjala_Gondi"),
    c(0x11D89, None, "GUNJALA GONDI LETTER SA", 0x31, "Gunjala_Gondi"),
    c(0x11D8A, None, "GUNJALA GONDI VOWEL SIGN AA", 0x21, "Gunjala_Gondi"),
    c(0x11D8B, None, "GUNJALA GONDI VOWEL SIGN I", 0x21, "Gunjala_Gondi"),
    c(0x11D8C, None, "GUNJALA GONDI VOWEL SIGN II", 0x21, "Gunjala_Gondi"),
    c(0x11D8D, None, "GUNJALA GONDI VOWEL SIGN U", 0x21, "Gunjala_Gondi"),
    c(0x11D8E, None, "GUNJALA GONDI VOWEL SIGN UU", 0x21, "Gunjala_Gondi"),
    c(0x11D90, None, "GUNJALA GONDI VOWEL SIGN EE", 0x21, "Gunjala_Gondi"),
    c(0x11D91, None, "GUNJALA GONDI VOWEL SIGN AI", 0x21, "Gunjala_Gondi"),
    c(0x11D93, None, "GUNJALA GONDI VOWEL SIGN OO", 0x21, "Gunjala_Gondi"),
    c(0x11D94, None, "GUNJALA GONDI VOWEL SIGN AU", 0x21, "Gunjala_Gondi"),
    c(0x11D95, None, "GUNJALA GONDI SIGN ANUSVARA", 0x21, "Gunjala_Gondi"),
    c(0x11D96, None, "GUNJALA GONDI SIGN VISARGA", 0x21, "Gunjala_Gondi"),
    c(0x11D97, None, "GUNJALA GONDI VIRAMA", 0x20, "Gunjala_Gondi"),
    c(0x11D98, None, "GUNJALA GONDI OM", 0x31, "Gunjala_Gondi"),
    c(0x11DA0, None, "GUNJALA GONDI DIGIT ZERO", 0x20, "Gunjala_Gondi"),
    c(0x11DA1, None, "GUNJALA GONDI DIGIT ONE", 0x20, "Gunjala_Gondi"),
    c(0x11DA2, None, "GUNJALA GONDI DIGIT TWO", 0x20, "Gunjala_Gondi"),
    c(0x11DA3, None, "GUNJALA GONDI DIGIT THREE", 0x20, "Gunjala_Gondi"),
    c(0x11DA4, None, "GUNJALA GONDI DIGIT FOUR", 0x20, "Gunjala_Gondi"),
    c(0x11DA5, None, "GUNJALA GONDI DIGIT FIVE", 0x20, "Gunjala_Gondi"),
    c(0x11DA6, None, "GUNJALA GONDI DIGIT SIX", 0x20, "Gunjala_Gondi"),
    c(0x11DA7, None, "GUNJALA GONDI DIGIT SEVEN", 0x20, "Gunjala_Gondi"),
    c(0x11DA8, None, "GUNJALA GONDI DIGIT EIGHT", 0x20, "Gunjala_Gondi"),
    c(0x11DA9, None, "GUNJALA GONDI DIGIT NINE", 0x20, "Gunjala_Gondi"),
    c(0x11EE0, None, "MAKASAR LETTER KA", 0x31, "Makasar"),
    c(0x11EE1, None, "MAKASAR LETTER GA", 0x31, "Makasar"),
    c(0x11EE2, None, "MAKASAR LETTER NGA", 0x31, "Makasar"),
    c(0x11EE3, None, "MAKASAR LETTER PA", 0x31, "Makasar"),
    c(0x11EE4, None, "MAKASAR LETTER BA", 0x31, "Makasar"),
    c(0x11EE5, None, "MAKASAR LETTER MA", 0x31, "Makasar"),
    c(0x11EE6, None, "MAKASAR LETTER TA", 0x31, "Makasar"),
    c(0x11EE7, None, "MAKASAR LETTER DA", 0x31, "Makasar"),
    c(0x11EE8, None, "MAKASAR LETTER NA", 0x31, "Makasar"),
    c(0x11EE9, None, "MAKASAR LETTER CA", 0x31, "Makasar"),
    c(0x11EEA, None, "MAKASAR LETTER JA", 0x31, "Makasar"),
    c(0x11EEB, None, "MAKASAR LETTER NYA", 0x31, "Makasar"),
    c(0x11EEC, None, "MAKASAR LETTER YA", 0x31, "Makasar"),
    c(0x11EED, None, "MAKASAR LETTER RA", 0x31, "Makasar"),
    c(0x11EEE, None, "MAKASAR LETTER LA", 0x31, "Makasar"),
    c(0x11EEF, None, "MAKASAR LETTER VA", 0x31, "Makasar"),
    c(0x11EF0, None, "MAKASAR LETTER SA", 0x31, "Makasar"),
    c(0x11EF1, None, "MAKASAR LETTER A", 0x31, "Makasar"),
    c(0x11EF2, None, "MAKASAR ANGKA", 0x31, "Makasar"),
    c(0x11EF3, None, "MAKASAR VOWEL SIGN I", 0x21, "Makasar"),
    c(0x11EF4, None, "MAKASAR VOWEL SIGN U", 0x21, "Makasar"),
    c(0x11EF5, None, "MAKASAR VOWEL SIGN E", 0x21, "Makasar"),
    c(0x11EF6, None, "MAKASAR VOWEL SIGN O", 0x21, "Makasar"),
    c(0x11EF7, None, "MAKASAR PASSIMBANG", 0x00, "Makasar"),
    c(0x11EF8, None, "MAKASAR END OF SECTION", 0x00, "Makasar"),
    c(0x11FB0, None, "LISU LETTER YHA", 0x31, "Lisu_Sup"),
    c(0x11FC0, None, "TAMIL FRACTION ONE THREE-HUNDRED-AND-TWENTIETH", 0x00, "Tamil_Sup"),
    c(0x11FC1, None, "TAMIL FRACTION ONE ONE-HUNDRED-AND-SIXTIETH", 0x00, "Tamil_Sup"),
    c(0x11FC2, None, "TAMIL FRACTION ONE EIGHTIETH", 0x00, "Tamil_Sup"),
    c(0x11FC3, None, "TAMIL FRACTION ONE SIXTY-FOURTH", 0x00, "Tamil_Sup"),
    c(0x11FC4, None, "TAMIL FRACTION ONE FORTIETH", 0x00, "Tamil_Sup"),
    c(0x11FC5, None, "TAMIL FRACTION ONE THIRTY-SECOND", 0x00, "Tamil_Sup"),
    c(0x11FC6, None, "TAMIL FRACTION THREE EIGHTIETHS", 0x00, "Tamil_Sup"),
    c(0x11FC7, None, "TAMIL FRACTION THREE SIXTY-FOURTHS", 0x00, "Tamil_Sup"),
    c(0x11FC8, None, "TAMIL FRACTION ONE TWENTIETH", 0x00, "Tamil_Sup"),
    c(0x11FC9, None, "TAMIL FRACTION ONE SIXTEENTH-1", 0x00, "Tamil_Sup"),
    c(0x11FCA, None, "TAMIL FRACTION ONE SIXTEENTH-2", 0x00, "Tamil_Sup"),
    c(0x11FCB, None, "TAMIL FRACTION ONE TENTH", 0x00, "Tamil_Sup"),
    c(0x11FCC, None, "TAMIL FRACTION ONE EIGHTH", 0x00, "Tamil_Sup"),
    c(0x11FCD, None, "TAMIL FRACTION THREE TWENTIETHS", 0x00, "Tamil_Sup"),
    c(0x11FCE, None, "TAMIL FRACTION THREE SIXTEENTHS", 0x00, "Tamil_Sup"),
    c(0x11FCF, None, "TAMIL FRACTION ONE FIFTH", 0x00, "Tamil_Sup"),
    c(0x11FD0, None, "TAMIL FRACTION ONE QUARTER", 0x00, "Tamil_Sup"),
    c(0x11FD1, None, "TAMIL FRACTION ONE HALF-1", 0x00, "Tamil_Sup"),
    c(0x11FD2, None, "TAMIL FRACTION ONE HALF-2", 0x00, "Tamil_Sup"),
    c(0x11FD3, None, "TAMIL FRACTION THREE QUARTERS", 0x00, "Tamil_Sup"),
    c(0x11FD4, None, "TAMIL FRACTION DOWNSCALING FACTOR KIIZH", 0x00, "Tamil_Sup"),
    c(0x11FD5, None, "TAMIL SIGN NEL", 0x00, "Tamil_Sup"),
    c(0x11FD6, None, "TAMIL SIGN CEVITU", 0x00, "Tamil_Sup"),
    c(0x11FD7, None, "TAMIL SIGN AAZHAAKKU", 0x00, "Tamil_Sup"),
    c(0x11FD8, None, "TAMIL SIGN UZHAKKU", 0x00, "Tamil_Sup"),
    c(0x11FD9, None, "TAMIL SIGN MUUVUZHAKKU", 0x00, "Tamil_Sup"),
    c(0x11FDA, None, "TAMIL SIGN KURUNI", 0x00, "Tamil_Sup"),
    c(0x11FDB, None, "TAMIL SIGN PATHAKKU", 0x00, "Tamil_Sup"),
    c(0x11FDC, None, "TAMIL SIGN MUKKURUNI", 0x00, "Tamil_Sup"),
    c(0x11FDD, None, "TAMIL SIGN KAACU", 0x00, "Tamil_Sup"),
    c(0x11FDE, None, "TAMIL SIGN PANAM", 0x00, "Tamil_Sup"),
    c(0x11FDF, None, "TAMIL SIGN PON", 0x00, "Tamil_Sup"),
    c(0x11FE0, None, "TAMIL SIGN VARAAKAN", 0x00, "Tamil_Sup"),
    c(0x11FE1, None, "TAMIL SIGN PAARAM", 0x00, "Tamil_Sup"),
    c(0x11FE2, None, "TAMIL SIGN KUZHI", 0x00, "Tamil_Sup"),
    c(0x11FE3, None, "TAMIL SIGN VELI", 0x00, "Tamil_Sup"),
    c(0x11FE4, None, "TAMIL WET CULTIVATION SIGN", 0x00, "Tamil_Sup"),
    c(0x11FE5, None, "TAMIL DRY CULTIVATION SIGN", 0x00, "Tamil_Sup"),
    c(0x11FE6, None, "TAMIL LAND SIGN", 0x00, "Tamil_Sup"),
    c(0x11FE7, None, "TAMIL SALT PAN SIGN", 0x00, "Tamil_Sup"),
    c(0x11FE8, None, "TAMIL TRADITIONAL CREDIT SIGN", 0x00, "Tamil_Sup"),
    c(0x11FE9, None, "TAMIL TRADITIONAL NUMBER SIGN", 0x00, "Tamil_Sup"),
    c(0x11FEA, None, "TAMIL CURRENT SIGN", 0x00, "Tamil_Sup"),
    c(0x11FEB, None, "TAMIL AND ODD SIGN", 0x00, "Tamil_Sup"),
    c(0x11FEC, None, "TAMIL SPENT SIGN", 0x00, "Tamil_Sup"),
    c(0x11FED, None, "TAMIL TOTAL SIGN", 0x00, "Tamil_Sup"),
    c(0x11FEE, None, "TAMIL IN POSSESSION SIGN", 0x00, "Tamil_Sup"),
    c(0x11FEF, None, "TAMIL STARTING FROM SIGN", 0x00, "Tamil_Sup"),
    c(0x11FF0, None, "TAMIL SIGN MUTHALIYA", 0x00, "Tamil_Sup"),
    c(0x11FF1, None, "TAMIL SIGN VAKAIYARAA", 0x00, "Tamil_Sup"),
    c(0x11FFF, None, "TAMIL PUNCTUATION END OF TEXT", 0x00, "Tamil_Sup"),
    c(0x12000, None, "CUNEIFORM SIGN A", 0x31, "Cuneiform"),
    c(0x12001, None, "CUNEIFORM SIGN A TIMES A", 0x31, "Cuneiform"),
    c(0x12002, None, "CUNEIFORM SIGN A TIMES BAD", 0x31, "Cuneiform"),
    c(0x12003, None, "CUNEIFORM SIGN A TIMES GAN2 TENU", 0x31, "Cuneiform"),
    c(0x12004, None, "CUNEIFORM SIGN A TIMES HA", 0x31, "Cuneiform"),
    c(0x12005, None, "CUNEIFORM SIGN A TIMES IGI", 0x31, "Cuneiform"),
    c(0x12006, None, "CUNEIFORM SIGN A TIMES LAGAR GUNU", 0x31, "Cuneiform"),
    c(0x12007, None, "CUNEIFORM SIGN A TIMES MUSH", 0x31, "Cuneiform"),
    c(0x12008, None, "CUNEIFORM SIGN A TIMES SAG", 0x31, "Cuneiform"),
    c(0x12009, None, "CUNEIFORM SIGN A2", 0x31, "Cuneiform"),
    c(0x1200A, None, "CUNEIFORM SIGN AB", 0x31, "Cuneiform"),
    c(0x1200B, None, "CUNEIFORM SIGN AB TIMES ASH2", 0x31, "Cuneiform"),
    c(0x1200C, None, "CUNEIFORM SIGN AB TIMES DUN3 GUNU", 0x31, "Cuneiform"),
    c(0x1200D, None, "CUNEIFORM SIGN AB TIMES GAL", 0x31, "Cuneiform"),
    c(0x1200E, None, "CUNEIFORM SIGN AB TIMES GAN2 TENU", 0x31, "Cuneiform"),
    c(0x1200F, None, "CUNEIFORM SIGN AB TIMES HA", 0x31, "Cuneiform"),
    c(0x12010, None, "CUNEIFORM SIGN AB TIMES IGI GUNU", 0x31, "Cuneiform"),
    c(0x12011, None, "CUNEIFORM SIGN AB TIMES IMIN", 0x31, "Cuneiform"),
    c(0x12012, None, "CUNEIFORM SIGN AB TIMES LAGAB", 0x31, "Cuneiform"),
    c(0x12013, None, "CUNEIFORM SIGN AB TIMES SHESH", 0x31, "Cuneiform"),
    c(0x12014, None, "CUNEIFORM SIGN AB TIMES U PLUS U PLUS U", 0x31, "Cuneiform"),
    c(0x12015, None, "CUNEIFORM SIGN AB GUNU", 0x31, "Cuneiform"),
    c(0x12016, None, "CUNEIFORM SIGN AB2", 0x31, "Cuneiform"),
    c(0x12017, None, "CUNEIFORM SIGN AB2 TIMES BALAG", 0x31, "Cuneiform"),
    c(0x12018, None, "CUNEIFORM SIGN AB2 TIMES GAN2 TENU", 0x31, "Cuneiform"),
    c(0x12019, None, "CUNEIFORM SIGN AB2 TIMES ME PLUS EN", 0x31, "Cuneiform"),
    c(0x1201A, None, "CUNEIFORM SIGN AB2 TIMES SHA3", 0x31, "Cuneiform"),
    c(0x1201B, None, "CUNEIFORM SIGN AB2 TIMES TAK4", 0x31, "Cuneiform"),
    c(0x1201C, None, "CUNEIFORM SIGN AD", 0x31, "Cuneiform"),
    c(0x1201D, None, "CUNEIFORM SIGN AK", 0x31, "Cuneiform"),
    c(0x1201E, None, "CUNEIFORM SIGN AK TIMES ERIN2", 0x31, "Cuneiform"),
    c(0x1201F, None, "CUNEIFORM SIGN AK TIMES SHITA PLUS GISH", 0x31, "Cuneiform"),
    c(0x12020, None, "CUNEIFORM SIGN AL", 0x31, "Cuneiform"),
    c(0x12021, None, "CUNEIFORM SIGN AL TIMES AL", 0x31, "Cuneiform"),
    c(0x12022, None, "CUNEIFORM SIGN AL TIMES DIM2", 0x31, "Cuneiform"),
    c(0x12023, None, "CUNEIFORM SIGN AL TIMES GISH", 0x31, "Cuneiform"),
    c(0x12024, None, "CUNEIFORM SIGN AL TIMES HA", 0x31, "Cuneiform"),
    c(0x12025, None, "CUNEIFORM SIGN AL TIMES KAD3", 0x31, "Cuneiform"),
    c(0x12026, None, "CUNEIFORM SIGN AL TIMES KI", 0x31, "Cuneiform"),
    c(0x12027, None, "CUNEIFORM SIGN AL TIMES SHE", 0x31, "Cuneiform"),
    c(0x12028, None, "CUNEIFORM SIGN AL TIMES USH", 0x31, "Cuneiform"),
    c(0x12029, None, "CUNEIFORM SIGN ALAN", 0x31, "Cuneiform"),
    c(0x1202A, None, "CUNEIFORM SIGN ALEPH", 0x31, "Cuneiform"),
    c(0x1202B, None, "CUNEIFORM SIGN AMAR", 0x31, "Cuneiform"),
    c(0x1202C, None, "CUNEIFORM SIGN AMAR TIMES SHE", 0x31, "Cuneiform"),
    c(0x1202D, None, "CUNEIFORM SIGN AN", 0x31, "Cuneiform"),
    c(0x1202E, None, "CUNEIFORM SIGN AN OVER AN", 0x31, "Cuneiform"),
    c(0x1202F, None, "CUNEIFORM SIGN AN THREE TIMES", 0x31, "Cuneiform"),
    c(0x12030, None, "CUNEIFORM SIGN AN PLUS NAGA OPPOSING AN PLUS NAGA", 0x31, "Cuneiform"),
    c(0x12031, None, "CUNEIFORM SIGN AN PLUS NAGA SQUARED", 0x31, "Cuneiform"),
    c(0x12032, None, "CUNEIFORM SIGN ANSHE", 0x31, "Cuneiform"),
    c(0x12033, None, "CUNEIFORM SIGN APIN", 0x31, "Cuneiform"),
    c(0x12034, None, "CUNEIFORM SIGN ARAD", 0x31, "Cuneiform"),
    c(0x12035, None, "CUNEIFORM SIGN ARAD TIMES KUR", 0x31, "Cuneiform"),
    c(0x12036, None, "CUNEIFORM SIGN ARKAB", 0x31, "Cuneiform"),
    c(0x12037, None, "CUNEIFORM SIGN ASAL2", 0x31, "Cuneiform"),
    c(0x12038, None, "CUNEIFORM SIGN ASH", 0x31, "Cuneiform"),
    c(0x12039, None, "CUNEIFORM SIGN ASH ZIDA TENU", 0x31, "Cuneiform"),
    c(0x1203A, None, "CUNEIFORM SIGN ASH KABA TENU", 0x31, "Cuneiform"),
    c(0x1203B, None, "CUNEIFORM SIGN ASH OVER ASH TUG2 OVER TUG2 TUG2 OVER TUG2 PAP", 0x31, "Cuneiform"),
    c(0x1203C, None, "CUNEIFORM SIGN ASH OVER ASH OVER ASH", 0x31, "Cuneiform"),
    c(0x1203D, None, "CUNEIFORM SIGN ASH OVER ASH OVER ASH CROSSING ASH OVER ASH OVER ASH", 0x31, "Cuneiform"),
    c(0x1203E, None, "CUNEIFORM SIGN ASH2", 0x31, "Cuneiform"),
    c(0x1203F, None, "CUNEIFORM SIGN ASHGAB", 0x31, "Cuneiform"),
    c(0x12040, None, "CUNEIFORM SIGN BA", 0x31, "Cuneiform"),
    c(0x12041, None, "CUNEIFORM SIGN BAD", 0x31, "Cuneiform"),
    c(0x12042, None, "CUNEIFORM SIGN BAG3", 0x31, "Cuneiform"),
    c(0x12043, None, "CUNEIFORM SIGN BAHAR2", 0x31, "Cuneiform"),
    c(0x12044, None, "CUNEIFORM SIGN BAL", 0x31, "Cuneiform"),
    c(0x12045, None, "CUNEIFORM SIGN BAL OVER BAL", 0x31, "Cuneiform"),
    c(0x12046, None, "CUNEIFORM SIGN BALAG", 0x31, "Cuneiform"),
    c(0x12047, None, "CUNEIFORM SIGN BAR", 0x31, "Cuneiform"),
    c(0x12048, None, "CUNEIFORM SIGN BARA2", 0x31, "Cuneiform"),
    c(0x12049, None, "CUNEIFORM SIGN BI", 0x31, "Cuneiform"),
    c(0x1204A, None, "CUNEIFORM SIGN BI TIMES A", 0x31, "Cuneiform"),
    c(0x1204B, None, "CUNEIFORM SIGN BI TIMES GAR", 0x31, "Cuneiform"),
    c(0x1204C, None, "CUNEIFORM SIGN BI TIMES IGI GUNU", 0x31, "Cuneiform"),
    c(0x1204D, None, "CUNEIFORM SIGN BU", 0x31, "Cuneiform"),
    c(0x1204E, None, "CUNEIFORM SIGN BU OVER BU AB", 0x31, "Cuneiform"),
    c(0x1204F, None, "CUNEIFORM SIGN BU OVER BU UN", 0x31, "Cuneiform"),
    c(0x12050, None, "CUNEIFORM SIGN BU CROSSING BU", 0x31, "Cuneiform"),
    c(0x12051, None, "CUNEIFORM SIGN BULUG", 0x31, "Cuneiform"),
    c(0x12052, None, "CUNEIFORM SIGN BULUG OVER BULUG", 0x31, "Cuneiform"),
    c(0x12053, None, "CUNEIFORM SIGN BUR", 0x31, "Cuneiform"),
    c(0x12054, None, "CUNEIFORM SIGN BUR2", 0x31, "Cuneiform"),
    c(0x12055, None, "CUNEIFORM SIGN DA", 0x31, "Cuneiform"),
    c(0x12056, None, "CUNEIFORM SIGN DAG", 0x31, "Cuneiform"),
    c(0x12057, None, "CUNEIFORM SIGN DAG KISIM5 TIMES A PLUS MASH", 0x31, "Cuneiform"),
    c(0x12058, None, "CUNEIFORM SIGN DAG KISIM5 TIMES AMAR", 0x31, "Cuneiform"),
    c(0x12059, None, "CUNEIFORM SIGN DAG KISIM5 TIMES BALAG", 0x31, "Cuneiform"),
    c(0x1205A, None, "CUNEIFORM SIGN DAG KISIM5 TIMES BI", 0x31, "Cuneiform"),
    c(0x1205B, None, "CUNEIFORM SIGN DAG KISIM5 TIMES GA", 0x31, "Cuneiform"),
    c(0x1205C, None, "CUNEIFORM SIGN DAG KISIM5 TIMES GA PLUS MASH", 0x31, "Cuneiform"),
    c(0x1205D, None, "CUNEIFORM SIGN DAG KISIM5 TIMES GI", 0x31, "Cuneiform"),
    c(0x1205E, None, "CUNEIFORM SIGN DAG KISIM5 TIMES GIR2", 0x31, "Cuneiform"),
    c(0x1205F, None, "CUNEIFORM SIGN DAG KISIM5 TIMES GUD", 0x31, "Cuneiform"),
    c(0x12060, None, "CUNEIFORM SIGN DAG KISIM5 TIMES HA", 0x31, "Cuneiform"),
    c(0x12061, None, "CUNEIFORM SIGN DAG KISIM5 TIMES IR", 0x31, "Cuneiform"),
    c(0x12062, None, "CUNEIFORM SIGN DAG KISIM5 TIMES IR PLUS LU", 0x31, "Cuneiform"),
    c(0x12063, None, "CUNEIFORM SIGN DAG KISIM5 TIMES KAK", 0x31, "Cuneiform"),
    c(0x12064, None, "CUNEIFORM SIGN DAG KISIM5 TIMES LA", 0x31, "Cuneiform"),
    c(0x12065, None, "CUNEIFORM SIGN DAG KISIM5 TIMES LU", 0x31, "Cuneiform"),
    c(0x12066, None, "CUNEIFORM SIGN DAG KISIM5 TIMES LU PLUS MASH2", 0x31, "Cuneiform"),
    c(0x12067, None, "CUNEIFORM SIGN DAG KISIM5 TIMES LUM", 0x31, "Cuneiform"),
    c(0x12068, None, "CUNEIFORM SIGN DAG KISIM5 TIMES NE", 0x31, "Cuneiform"),
    c(0x12069, None, "CUNEIFORM SIGN DAG KISIM5 TIMES PAP PLUS PAP", 0x31, "Cuneiform"),
    c(0x1206A, None, "CUNEIFORM SIGN DAG KISIM5 TIMES SI", 0x31, "Cuneiform"),
    c(0x1206B, None, "CUNEIFORM SIGN DAG KISIM5 TIMES TAK4", 0x31, "Cuneiform"),
    c(0x1206C, None, "CUNEIFORM SIGN DAG KISIM5 TIMES U2 PLUS GIR2", 0x31, "Cuneiform"),
    c(0x1206D, None, "CUNEIFORM SIGN DAG KISIM5 TIMES USH", 0x31, "Cuneiform"),
    c(0x1206E, None, "CUNEIFORM SIGN DAM", 0x31, "Cuneiform"),
    c(0x1206F, None, "CUNEIFORM SIGN DAR", 0x31, "Cuneiform"),
    c(0x12070, None, "CUNEIFORM SIGN DARA3", 0x31, "Cuneiform"),
    c(0x12071, None, "CUNEIFORM SIGN DARA4", 0x31, "Cuneiform"),
    c(0x12072, None, "CUNEIFORM SIGN DI", 0x31, "Cuneiform"),
    c(0x12073, None, "CUNEIFORM SIGN DIB", 0x31, "Cuneiform"),
    c(0x12074, None, "CUNEIFORM SIGN DIM", 0x31, "Cuneiform"),
    c(0x12075, None, "CUNEIFORM SIGN DIM TIMES SHE", 0x31, "Cuneiform"),
    c(0x12076, None, "CUNEIFORM SIGN DIM2", 0x31, "Cuneiform"),
    c(0x12077, None, "CUNEIFORM SIGN DIN", 0x31, "Cuneiform"),
    c(0x12078, None, "CUNEIFORM SIGN DIN KASKAL U GUNU DISH", 0x31, "Cuneiform"),
    c(0x12079, None, "CUNEIFORM SIGN DISH", 0x31, "Cuneiform"),
    c(0x1207A, None, "CUNEIFORM SIGN DU", 0x31, "Cuneiform"),
    c(0x1207B, None, "CUNEIFORM SIGN DU OVER DU", 0x31, "Cuneiform"),
    c(0x1207C, None, "CUNEIFORM SIGN DU GUNU", 0x31, "Cuneiform"),
    c(0x1207D, None, "CUNEIFORM SIGN DU SHESHIG", 0x31, "Cuneiform"),
    c(0x1207E, None, "CUNEIFORM SIGN DUB", 0x31, "Cuneiform"),
    c(0x1207F, None, "CUNEIFORM SIGN DUB TIMES ESH2", 0x31, "Cuneiform"),
    c(0x12080, None, "CUNEIFORM SIGN DUB2", 0x31, "Cuneiform"),
    c(0x12081, None, "CUNEIFORM SIGN DUG", 0x31, "Cuneiform"),
    c(0x12082, None, "CUNEIFORM SIGN DUGUD", 0x31, "Cuneiform"),
    c(0x12083, None, "CUNEIFORM SIGN DUH", 0x31, "Cuneiform"),
    c(0x12084, None, "CUNEIFORM SIGN DUN", 0x31, "Cuneiform"),
    c(0x12085, None, "CUNEIFORM SIGN DUN3", 0x31, "Cuneiform"),
    c(0x12086, None, "CUNEIFORM SIGN DUN3 GUNU", 0x31, "Cuneiform"),
    c(0x12087, None, "CUNEIFORM SIGN DUN3 GUNU GUNU", 0x31, "Cuneiform"),
    c(0x12088, None, "CUNEIFORM SIGN DUN4", 0x31, "Cuneiform"),
    c(0x12089, None, "CUNEIFORM SIGN DUR2", 0x31, "Cuneiform"),
    c(0x1208A, None, "CUNEIFORM SIGN E", 0x31, "Cuneiform"),
    c(0x1208B, None, "CUNEIFORM SIGN E TIMES PAP", 0x31, "Cuneiform"),
    c(0x1208C, None, "CUNEIFORM SIGN E OVER E NUN OVER NUN", 0x31, "Cuneiform"),
    c(0x1208D, None, "CUNEIFORM SIGN E2", 0x31, "Cuneiform"),
    c(0x1208E, None, "CUNEIFORM SIGN E2 TIMES A PLUS HA PLUS DA", 0x31, "Cuneiform"),
    c(0x1208F, None, "CUNEIFORM SIGN E2 TIMES GAR", 0x31, "Cuneiform"),
    c(0x12090, None, "CUNEIFORM SIGN E2 TIMES MI", 0x31, "Cuneiform"),
    c(0x12091, None, "CUNEIFORM SIGN E2 TIMES SAL", 0x31, "Cuneiform"),
    c(0x12092, None, "CUNEIFORM SIGN E2 TIMES SHE", 0x31, "Cuneiform"),
    c(0x12093, None, "CUNEIFORM SIGN E2 TIMES U", 0x31, "Cuneiform"),
    c(0x12094, None, "CUNEIFORM SIGN EDIN", 0x31, "Cuneiform"),
    c(0x12095, None, "CUNEIFORM SIGN EGIR", 0x31, "Cuneiform"),
    c(0x12096, None, "CUNEIFORM SIGN EL", 0x31, "Cuneiform"),
    c(0x12097, None, "CUNEIFORM SIGN EN", 0x31, "Cuneiform"),
    c(0x12098, None, "CUNEIFORM SIGN EN TIMES GAN2", 0x31, "Cuneiform"),
    c(0x12099, None, "CUNEIFORM SIGN EN TIMES GAN2 TENU", 0x31, "Cuneiform"),
    c(0x1209A, None, "CUNEIFORM SIGN EN TIMES ME", 0x31, "Cuneiform"),
    c(0x1209B, None, "CUNEIFORM SIGN EN CROSSING EN", 0x31, "Cuneiform"),
    c(0x1209C, None, "CUNEIFORM SIGN EN OPPOSING EN", 0x31, "Cuneiform"),
    c(0x1209D, None, "CUNEIFORM SIGN EN SQUARED", 0x31, "Cuneiform"),
    c(0x1209E, None, "CUNEIFORM SIGN EREN", 0x31, "Cuneiform"),
    c(0x1209F, None, "CUNEIFORM SIGN ERIN2", 0x31, "Cuneiform"),
    c(0x120A0, None, "CUNEIFORM SIGN ESH2", 0x31, "Cuneiform"),
    c(0x120A1, None, "CUNEIFORM SIGN EZEN", 0x31, "Cuneiform"),
    c(0x120A2, None, "CUNEIFORM SIGN EZEN TIMES A", 0x31, "Cuneiform"),
    c(0x120A3, None, "CUNEIFORM SIGN EZEN TIMES A PLUS LAL", 0x31, "Cuneiform"),
    c(0x120A4, None, "CUNEIFORM SIGN EZEN TIMES A PLUS LAL TIMES LAL", 0x31, "Cuneiform"),
    c(0x120A5, None, "CUNEIFORM SIGN EZEN TIMES AN", 0x31, "Cuneiform"),
    c(0x120A6, None, "CUNEIFORM SIGN EZEN TIMES BAD", 0x31, "Cuneiform"),
    c(0x120A7, None, "CUNEIFORM SIGN EZEN TIMES DUN3 GUNU", 0x31, "Cuneiform"),
    c(0x120A8, None, "CUNEIFORM SIGN EZEN TIMES DUN3 GUNU GUNU", 0x31, "Cuneiform"),
    c(0x120A9, None, "CUNEIFORM SIGN EZEN TIMES HA", 0x31, "Cuneiform"),
    c(0x120AA, None, "CUNEIFORM SIGN EZEN TIMES HA GUNU", 0x31, "Cuneiform"),
    c(0x120AB, None, "CUNEIFORM SIGN EZEN TIMES IGI GUNU", 0x31, "Cuneiform"),
    c(0x120AC, None, "CUNEIFORM SIGN EZEN TIMES KASKAL", 0x31, "Cuneiform"),
    c(0x120AD, None, "CUNEIFORM SIGN EZEN TIMES KASKAL SQUARED", 0x31, "Cuneiform"),
    c(0x120AE, None, "CUNEIFORM SIGN EZEN TIMES KU3", 0x31, "Cuneiform"),
    c(0x120AF, None, "CUNEIFORM SIGN EZEN TIMES LA", 0x31, "Cuneiform"),
    c(0x120B0, None, "CUNEIFORM SIGN EZEN TIMES LAL TIMES LAL", 0x31, "Cuneiform"),
    c(0x120B1, None, "CUNEIFORM SIGN EZEN TIMES LI", 0x31, "Cuneiform"),
    c(0x120B2, None, "CUNEIFORM SIGN EZEN TIMES LU", 0x31, "Cuneiform"),
    c(0x120B3, None, "CUNEIFORM SIGN EZEN TIMES U2", 0x31, "Cuneiform"),
    c(0x120B4, None, "CUNEIFORM SIGN EZEN TIMES UD", 0x31, "Cuneiform"),
    c(0x120B5, None, "CUNEIFORM SIGN GA", 0x31, "Cuneiform"),
    c(0x120B6, None, "CUNEIFORM SIGN GA GUNU", 0x31, "Cuneiform"),
    c(0x120B7, None, "CUNEIFORM SIGN GA2", 0x31, "Cuneiform"),
    c(0x120B8, None, "CUNEIFORM SIGN GA2 TIMES A PLUS DA PLUS HA", 0x31, "Cuneiform"),
    c(0x120B9, None, "CUNEIFORM SIGN GA2 TIMES A PLUS HA", 0x31, "Cuneiform"),
    c(0x120BA, None, "CUNEIFORM SIGN GA2 TIMES A PLUS IGI", 0x31, "Cuneiform"),
    c(0x120BB, None, "CUNEIFORM SIGN GA2 TIMES AB2 TENU PLUS TAB", 0x31, "Cuneiform"),
    c(0x120BC, None, "CUNEIFORM SIGN GA2 TIMES AN", 0x31, "Cuneiform"),
    c(0x120BD, None, "CUNEIFORM SIGN GA2 TIMES ASH", 0x31, "Cuneiform"),
    c(0x120BE, None, "CUNEIFORM SIGN GA2 TIMES ASH2 PLUS GAL", 0x31, "Cuneiform"),
    c(0x120BF, None, "CUNEIFORM SIGN GA2 TIMES BAD", 0x31, "Cuneiform"),
    c(0x120C0, None, "CUNEIFORM SIGN GA2 TIMES BAR PLUS RA", 0x31, "Cuneiform"),
    c(0x120C1, None, "CUNEIFORM SIGN GA2 TIMES BUR", 0x31, "Cuneiform"),
    c(0x120C2, None, "CUNEIFORM SIGN GA2 TIMES BUR PLUS RA", 0x31, "Cuneiform"),
    c(0x120C3, None, "CUNEIFORM SIGN GA2 TIMES DA", 0x31, "Cuneiform"),
    c(0x120C4, None, "CUNEIFORM SIGN GA2 TIMES DI", 0x31, "Cuneiform"),
    c(0x120C5, None, "CUNEIFORM SIGN GA2 TIMES DIM TIMES SHE", 0x31, "Cuneiform"),
    c(0x120C6, None, "CUNEIFORM SIGN GA2 TIMES DUB", 0x31, "Cuneiform"),
    c(0x120C7, None, "CUNEIFORM SIGN GA2 TIMES EL", 0x31, "Cuneiform"),
    c(0x120C8, None, "CUNEIFORM SIGN GA2 TIMES EL PLUS LA", 0x31, "Cuneiform"),
    c(0x120C9, None, "CUNEIFORM SIGN GA2 TIMES EN", 0x31, "Cuneiform"),
    c(0x120CA, None, "CUNEIFORM SIGN GA2 TIMES EN TIMES GAN2 TENU", 0x31, "Cuneiform"),
    c(0x120CB, None, "CUNEIFORM SIGN GA2 TIMES GAN2 TENU", 0x31, "Cuneiform"),
    c(0x120CC, None, "CUNEIFORM SIGN GA2 TIMES GAR", 0x31, "Cuneiform"),
    c(0x120CD, None, "CUNEIFORM SIGN GA2 TIMES GI", 0x31, "Cuneiform"),
    c(0x120CE, None, "CUNEIFORM SIGN GA2 TIMES GI4", 0x31, "Cuneiform"),
    c(0x120CF, None, "CUNEIFORM SIGN GA2 TIMES GI4 PLUS A", 0x31, "Cuneiform"),
    c(0x120D0, None, "CUNEIFORM SIGN GA2 TIMES GIR2 PLUS SU", 0x31, "Cuneiform"),
    c(0x120D1, None, "CUNEIFORM SIGN GA2 TIMES HA PLUS LU PLUS ESH2", 0x31, "Cuneiform"),
    c(0x120D2, None, "CUNEIFORM SIGN GA2 TIMES HAL", 0x31, "Cuneiform"),
    c(0x120D3, None, "CUNEIFORM SIGN GA2 TIMES HAL PLUS LA", 0x31, "Cuneiform"),
    c(0x120D4, None, "CUNEIFORM SIGN GA2 TIMES HI PLUS LI", 0x31, "Cuneiform"),
    c(0x120D5, None, "CUNEIFORM SIGN GA2 TIMES HUB2", 0x31, "Cuneiform"),
    c(0x120D6, None, "CUNEIFORM SIGN GA2 TIMES IGI GUNU", 0x31, "Cuneiform"),
    c(0x120D7, None, "CUNEIFORM SIGN GA2 TIMES ISH PLUS HU PLUS ASH", 0x31, "Cuneiform"),
    c(0x120D8, None, "CUNEIFORM SIGN GA2 TIMES KAK", 0x31, "Cuneiform"),
    c(0x120D9, None, "CUNEIFORM SIGN GA2 TIMES KASKAL", 0x31, "Cuneiform"),
    c(0x120DA, None, "CUNEIFORM SIGN GA2 TIMES KID", 0x31, "Cuneiform"),
    c(0x120DB, None, "CUNEIFORM SIGN GA2 TIMES KID PLUS LAL", 0x31, "Cuneiform"),
    c(0x120DC, None, "CUNEIFORM SIGN GA2 TIMES KU3 PLUS AN", 0x31, "Cuneiform"),
    c(0x120DD, None, "CUNEIFORM SIGN GA2 TIMES LA", 0x31, "Cuneiform"),
    c(0x120DE, None, "CUNEIFORM SIGN GA2 TIMES ME PLUS EN", 0x31, "Cuneiform"),
    c(0x120DF, None, "CUNEIFORM SIGN GA2 TIMES MI", 0x31, "Cuneiform"),
    c(0x120E0, None, "CUNEIFORM SIGN GA2 TIMES NUN", 0x31, "Cuneiform"),
    c(0x120E1, None, "CUNEIFORM SIGN GA2 TIMES NUN OVER NUN", 0x31, "Cuneiform"),
    c(0x120E2, None, "CUNEIFORM SIGN GA2 TIMES PA", 0x31, "Cuneiform"),
    c(0x120E3, None, "CUNEIFORM SIGN GA2 TIMES SAL", 0x31, "Cuneiform"),
    c(0x120E4, None, "CUNEIFORM SIGN GA2 TIMES SAR", 0x31, "Cuneiform"),
    c(0x120E5, None, "CUNEIFORM SIGN GA2 TIMES SHE", 0x31, "Cuneiform"),
    c(0x120E6, None, "CUNEIFORM SIGN GA2 TIMES SHE PLUS TUR", 0x31, "Cuneiform"),
    c(0x120E7, None, "CUNEIFORM SIGN GA2 TIMES SHID", 0x31, "Cuneiform"),
    c(0x120E8, None, "CUNEIFORM SIGN GA2 TIMES SUM", 0x31, "Cuneiform"),
    c(0x120E9, None, "CUNEIFORM SIGN GA2 TIMES TAK4", 0x31, "Cuneiform"),
    c(0x120EA, None, "CUNEIFORM SIGN GA2 TIMES U", 0x31, "Cuneiform"),
    c(0x120EB, None, "CUNEIFORM SIGN GA2 TIMES UD", 0x31, "Cuneiform"),
    c(0x120EC, None, "CUNEIFORM SIGN GA2 TIMES UD PLUS DU", 0x31, "Cuneiform"),
    c(0x120ED, None, "CUNEIFORM SIGN GA2 OVER GA2", 0x31, "Cuneiform"),
    c(0x120EE, None, "CUNEIFORM SIGN GABA", 0x31, "Cuneiform"),
    c(0x120EF, None, "CUNEIFORM SIGN GABA CROSSING GABA", 0x31, "Cuneiform"),
    c(0x120F0, None, "CUNEIFORM SIGN GAD", 0x31, "Cuneiform"),
    c(0x120F1, None, "CUNEIFORM SIGN GAD OVER GAD GAR OVER GAR", 0x31, "Cuneiform"),
    c(0x120F2, None, "CUNEIFORM SIGN GAL", 0x31, "Cuneiform"),
    c(0x120F3, None, "CUNEIFORM SIGN GAL GAD OVER GAD GAR OVER GAR", 0x31, "Cuneiform"),
    c(0x120F4, None, "CUNEIFORM SIGN GALAM", 0x31, "Cuneiform"),
    c(0x120F5, None, "CUNEIFORM SIGN GAM", 0x31, "Cuneiform"),
    c(0x120F6, None, "CUNEIFORM SIGN GAN", 0x31, "Cuneiform"),
    c(0x120F7, None, "CUNEIFORM SIGN GAN2", 0x31, "Cuneiform"),
    c(0x120F8, None, "CUNEIFORM SIGN GAN2 TENU", 0x31, "Cuneiform"),
    c(0x120F9, None, "CUNEIFORM SIGN GAN2 OVER GAN2", 0x31, "Cuneiform"),
    c(0x120FA, None, "CUNEIFORM SIGN GAN2 CROSSING GAN2", 0x31, "Cuneiform"),
    c(0x120FB, None, "CUNEIFORM SIGN GAR", 0x31, "Cuneiform"),
    c(0x120FC, None, "CUNEIFORM SIGN GAR3", 0x31, "Cuneiform"),
    c(0x120FD, None, "CUNEIFORM SIGN GASHAN", 0x31, "Cuneiform"),
    c(0x120FE, None, "CUNEIFORM SIGN GESHTIN", 0x31, "Cuneiform"),
    c(0x120FF, None, "CUNEIFORM SIGN GESHTIN TIMES KUR", 0x31, "Cuneiform"),
    c(0x12100, None, "CUNEIFORM SIGN GI", 0x31, "Cuneiform"),
    c(0x12101, None, "CUNEIFORM SIGN GI TIMES E", 0x31, "Cuneiform"),
    c(0x12102, None, "CUNEIFORM SIGN GI TIMES U", 0x31, "Cuneiform"),
    c(0x12103, None, "CUNEIFORM SIGN GI CROSSING GI", 0x31, "Cuneiform"),
    c(0x12104, None, "CUNEIFORM SIGN GI4", 0x31, "Cuneiform"),
    c(0x12105, None, "CUNEIFORM SIGN GI4 OVER GI4", 0x31, "Cuneiform"),
    c(0x12106, None, "CUNEIFORM SIGN GI4 CROSSING GI4", 0x31, "Cuneiform"),
    c(0x12107, None, "CUNEIFORM SIGN GIDIM", 0x31, "Cuneiform"),
    c(0x12108, None, "CUNEIFORM SIGN GIR2", 0x31, "Cuneiform"),
    c(0x12109, None, "CUNEIFORM SIGN GIR2 GUNU", 0x31, "Cuneiform"),
    c(0x1210A, None, "CUNEIFORM SIGN GIR3", 0x31, "Cuneiform"),
    c(0x1210B, None, "CUNEIFORM SIGN GIR3 TIMES A PLUS IGI", 0x31, "Cuneiform"),
    c(0x1210C, None, "CUNEIFORM SIGN GIR3 TIMES GAN2 TENU", 0x31, "Cuneiform"),
    c(0x1210D, None, "CUNEIFORM SIGN GIR3 TIMES IGI", 0x31, "Cuneiform"),
    c(0x1210E, None, "CUNEIFORM SIGN GIR3 TIMES LU PLUS IGI", 0x31, "Cuneiform"),
    c(0x1210F, None, "CUNEIFORM SIGN GIR3 TIMES PA", 0x31, "Cuneiform"),
    c(0x12110, None, "CUNEIFORM SIGN GISAL", 0x31, "Cuneiform"),
    c(0x12111, None, "CUNEIFORM SIGN GISH", 0x31, "Cuneiform"),
    c(0x12112, None, "CUNEIFORM SIGN GISH CROSSING GISH", 0x31, "Cuneiform"),
    c(0x12113, None, "CUNEIFORM SIGN GISH TIMES BAD", 0x31, "Cuneiform"),
    c(0x12114, None, "CUNEIFORM SIGN GISH TIMES TAK4", 0x31, "Cuneiform"),
    c(0x12115, None, "CUNEIFORM SIGN GISH TENU", 0x31, "Cuneiform"),
    c(0x12116, None, "CUNEIFORM SIGN GU", 0x31, "Cuneiform"),
    c(0x12117, None, "CUNEIFORM SIGN GU CROSSING GU", 0x31, "Cuneiform"),
    c(0x12118, None, "CUNEIFORM SIGN GU2", 0x31, "Cuneiform"),
    c(0x12119, None, "CUNEIFORM SIGN GU2 TIMES KAK", 0x31, "Cuneiform"),
    c(0x1211A, None, "CUNEIFORM SIGN GU2 TIMES KAK TIMES IGI GUNU", 0x31, "Cuneiform"),
    c(0x1211B, None, "CUNEIFORM SIGN GU2 TIMES NUN", 0x31, "Cuneiform"),
    c(0x1211C, None, "CUNEIFORM SIGN GU2 TIMES SAL PLUS TUG2", 0x31, "Cuneiform"),
    c(0x1211D, None, "CUNEIFORM SIGN GU2 GUNU", 0x31, "Cuneiform"),
    c(0x1211E, None, "CUNEIFORM SIGN GUD", 0x31, "Cuneiform"),
    c(0x1211F, None, "CUNEIFORM SIGN GUD TIMES A PLUS KUR", 0x31, "Cuneiform"),
    c(0x12120, None, "CUNEIFORM SIGN GUD TIMES KUR", 0x31, "Cuneiform"),
    c(0x12121, None, "CUNEIFORM SIGN GUD OVER GUD LUGAL", 0x31, "Cuneiform"),
    c(0x12122, None, "CUNEIFORM SIGN GUL", 0x31, "Cuneiform"),
    c(0x12123, None, "CUNEIFORM SIGN GUM", 0x31, "Cuneiform"),
    c(0x12124, None, "CUNEIFORM SIGN GUM TIMES SHE", 0x31, "Cuneiform"),
    c(0x12125, None, "CUNEIFORM SIGN GUR", 0x31, "Cuneiform"),
    c(0x12126, None, "CUNEIFORM SIGN GUR7", 0x31, "Cuneiform"),
    c(0x12127, None, "CUNEIFORM SIGN GURUN", 0x31, "Cuneiform"),
    c(0x12128, None, "CUNEIFORM SIGN GURUSH", 0x31, "Cuneiform"),
    c(0x12129, None, "CUNEIFORM SIGN HA", 0x31, "Cuneiform"),
    c(0x1212A, None, "CUNEIFORM SIGN HA TENU", 0x31, "Cuneiform"),
    c(0x1212B, None, "CUNEIFORM SIGN HA GUNU", 0x31, "Cuneiform"),
    c(0x1212C, None, "CUNEIFORM SIGN HAL", 0x31, "Cuneiform"),
    c(0x1212D, None, "CUNEIFORM SIGN HI", 0x31, "Cuneiform"),
    c(0x1212E, None, "CUNEIFORM SIGN HI TIMES ASH", 0x31, "Cuneiform"),
    c(0x1212F, None, "CUNEIFORM SIGN HI TIMES ASH2", 0x31, "Cuneiform"),
    c(0x12130, None, "CUNEIFORM SIGN HI TIMES BAD", 0x31, "Cuneiform"),
    c(0x12131, None, "CUNEIFORM SIGN HI TIMES DISH", 0x31, "Cuneiform"),
    c(0x12132, None, "CUNEIFORM SIGN HI TIMES GAD", 0x31, "Cuneiform"),
    c(0x12133, None, "CUNEIFORM SIGN HI TIMES KIN", 0x31, "Cuneiform"),
    c(0x12134, None, "CUNEIFORM SIGN HI TIMES NUN", 0x31, "Cuneiform"),
    c(0x12135, None, "CUNEIFORM SIGN HI TIMES SHE", 0x31, "Cuneiform"),
    c(0x12136, None, "CUNEIFORM SIGN HI TIMES U", 0x31, "Cuneiform"),
    c(0x12137, None, "CUNEIFORM SIGN HU", 0x31, "Cuneiform"),
    c(0x12138, None, "CUNEIFORM SIGN HUB2", 0x31, "Cuneiform"),
    c(0x12139, None, "CUNEIFORM SIGN HUB2 TIMES AN", 0x31, "Cuneiform"),
    c(0x1213A, None, "CUNEIFORM SIGN HUB2 TIMES HAL", 0x31, "Cuneiform"),
    c(0x1213B, None, "CUNEIFORM SIGN HUB2 TIMES KASKAL", 0x31, "Cuneiform"),
    c(0x1213C, None, "CUNEIFORM SIGN HUB2 TIMES LISH", 0x31, "Cuneiform"),
    c(0x1213D, None, "CUNEIFORM SIGN HUB2 TIMES UD", 0x31, "Cuneiform"),
    c(0x1213E, None, "CUNEIFORM SIGN HUL2", 0x31, "Cuneiform"),
    c(0x1213F, None, "CUNEIFORM SIGN I", 0x31, "Cuneiform"),
    c(0x12140, None, "CUNEIFORM SIGN I A", 0x31, "Cuneiform"),
    c(0x12141, None, "CUNEIFORM SIGN IB", 0x31, "Cuneiform"),
    c(0x12142, None, "CUNEIFORM SIGN IDIM", 0x31, "Cuneiform"),
    c(0x12143, None, "CUNEIFORM SIGN IDIM OVER IDIM BUR", 0x31, "Cuneiform"),
    c(0x12144, None, "CUNEIFORM SIGN IDIM OVER IDIM SQUARED", 0x31, "Cuneiform"),
    c(0x12145, None, "CUNEIFORM SIGN IG", 0x31, "Cuneiform"),
    c(0x12146, None, "CUNEIFORM SIGN IGI", 0x31, "Cuneiform"),
    c(0x12147, None, "CUNEIFORM SIGN IGI DIB", 0x31, "Cuneiform"),
    c(0x12148, None, "CUNEIFORM SIGN IGI RI", 0x31, "Cuneiform"),
    c(0x12149, None, "CUNEIFORM SIGN IGI OVER IGI SHIR OVER SHIR UD OVER UD", 0x31, "Cuneiform"),
    c(0x1214A, None, "CUNEIFORM SIGN IGI GUNU", 0x31, "Cuneiform"),
    c(0x1214B, None, "CUNEIFORM SIGN IL", 0x31, "Cuneiform"),
    c(0x1214C, None, "CUNEIFORM SIGN IL TIMES GAN2 TENU", 0x31, "Cuneiform"),
    c(0x1214D, None, "CUNEIFORM SIGN IL2", 0x31, "Cuneiform"),
    c(0x1214E, None, "CUNEIFORM SIGN IM", 0x31, "Cuneiform"),
    c(0x1214F, None, "CUNEIFORM SIGN IM TIMES TAK4", 0x31, "Cuneiform"),
    c(0x12150, None, "CUNEIFORM SIGN IM CROSSING IM", 0x31, "Cuneiform"),
    c(0x12151, None, "CUNEIFORM SIGN IM OPPOSING IM", 0x31, "Cuneiform"),
    c(0x12152, None, "CUNEIFORM SIGN IM SQUARED", 0x31, "Cuneiform"),
    c(0x12153, None, "CUNEIFORM SIGN IMIN", 0x31, "Cuneiform"),
    c(0x12154, None, "CUNEIFORM SIGN IN", 0x31, "Cuneiform"),
    c(0x12155, None, "CUNEIFORM SIGN IR", 0x31, "Cuneiform"),
    c(0x12156, None, "CUNEIFORM SIGN ISH", 0x31, "Cuneiform"),
    c(0x12157, None, "CUNEIFORM SIGN KA", 0x31, "Cuneiform"),
    c(0x12158, None, "CUNEIFORM SIGN KA TIMES A", 0x31, "Cuneiform"),
    c(0x12159, None, "CUNEIFORM SIGN KA TIMES AD", 0x31, "Cuneiform"),
    c(0x1215A, None, "CUNEIFORM SIGN KA TIMES AD PLUS KU3", 0x31, "Cuneiform"),
    c(0x1215B, None, "CUNEIFORM SIGN KA TIMES ASH2", 0x31, "Cuneiform"),
    c(0x1215C, None, "CUNEIFORM SIGN KA TIMES BAD", 0x31, "Cuneiform"),
    c(0x1215D, None, "CUNEIFORM SIGN KA TIMES BALAG", 0x31, "Cuneiform"),
    c(0x1215E, None, "CUNEIFORM SIGN KA TIMES BAR", 0x31, "Cuneiform"),
    c(0x1215F, None, "CUNEIFORM SIGN KA TIMES BI", 0x31, "Cuneiform"),
    c(0x12160, None, "CUNEIFORM SIGN KA TIMES ERIN2", 0x31, "Cuneiform"),
    c(0x12161, None, "CUNEIFORM SIGN KA TIMES ESH2", 0x31, "Cuneiform"),
    c(0x12162, None, "CUNEIFORM SIGN KA TIMES GA", 0x31, "Cuneiform"),
    c(0x12163, None, "CUNEIFORM SIGN KA TIMES GAL", 0x31, "Cuneiform"),
    c(0x12164, None, "CUNEIFORM SIGN KA TIMES GAN2 TENU", 0x31, "Cuneiform"),
    c(0x12165, None, "CUNEIFORM SIGN KA TIMES GAR", 0x31, "Cuneiform"),
    c(0x12166, None, "CUNEIFORM SIGN KA TIMES GAR PLUS SHA3 PLUS A", 0x31, "Cuneiform"),
    c(0x12167, None, "CUNEIFORM SIGN KA TIMES GI", 0x31, "Cuneiform"),
    c(0x12168, None, "CUNEIFORM SIGN KA TIMES GIR2", 0x31, "Cuneiform"),
    c(0x12169, None, "CUNEIFORM SIGN KA TIMES GISH PLUS SAR", 0x31, "Cuneiform"),
    c(0x1216A, None, "CUNEIFORM SIGN KA TIMES GISH CROSSING GISH", 0x31, "Cuneiform"),
    c(0x1216B, None, "CUNEIFORM SIGN KA TIMES GU", 0x31, "Cuneiform"),
    c(0x1216C, None, "CUNEIFORM SIGN KA TIMES GUR7", 0x31, "Cuneiform"),
    c(0x1216D, None, "CUNEIFORM SIGN KA TIMES IGI", 0x31, "Cuneiform"),
    c(0x1216E, None, "CUNEIFORM SIGN KA TIMES IM", 0x31, "Cuneiform"),
    c(0x1216F, None, "CUNEIFORM SIGN KA TIMES KAK", 0x31, "Cuneiform"),
    c(0x12170, None, "CUNEIFORM SIGN KA TIMES KI", 0x31, "Cuneiform"),
    c(0x12171, None, "CUNEIFORM SIGN KA TIMES KID", 0x31, "Cuneiform"),
    c(0x12172, None, "CUNEIFORM SIGN KA TIMES LI", 0x31, "Cuneiform"),
    c(0x12173, None, "CUNEIFORM SIGN KA TIMES LU", 0x31, "Cuneiform"),
    c(0x12174, None, "CUNEIFORM SIGN KA TIMES ME", 0x31, "Cuneiform"),
    c(0x12175, None, "CUNEIFORM SIGN KA TIMES ME PLUS DU", 0x31, "Cuneiform"),
    c(0x12176, None, "CUNEIFORM SIGN KA TIMES ME PLUS GI", 0x31, "Cuneiform"),
    c(0x12177, None, "CUNEIFORM SIGN KA TIMES ME PLUS TE", 0x31, "Cuneiform"),
    c(0x12178, None, "CUNEIFORM SIGN KA TIMES MI", 0x31, "Cuneiform"),
    c(0x12179, None, "CUNEIFORM SIGN KA TIMES MI PLUS NUNUZ", 0x31, "Cuneiform"),
    c(0x1217A, None, "CUNEIFORM SIGN KA TIMES NE", 0x31, "Cuneiform"),
    c(0x1217B, None, "CUNEIFORM SIGN KA TIMES NUN", 0x31, "Cuneiform"),
    c(0x1217C, None, "CUNEIFORM SIGN KA TIMES PI", 0x31, "Cuneiform"),
    c(0x1217D, None, "CUNEIFORM SIGN KA TIMES RU", 0x31, "Cuneiform"),
    c(0x1217E, None, "CUNEIFORM SIGN KA TIMES SA", 0x31, "Cuneiform"),
    c(0x1217F, None, "CUNEIFORM SIGN KA TIMES SAR", 0x31, "Cuneiform"),
    c(0x12180, None, "CUNEIFORM SIGN KA TIMES SHA", 0x31, "Cuneiform"),
    c(0x12181, None, "CUNEIFORM SIGN KA TIMES SHE", 0x31, "Cuneiform"),
    c(0x12182, None, "CUNEIFORM SIGN KA TIMES SHID", 0x31, "Cuneiform"),
    c(0x12183, None, "CUNEIFORM SIGN KA TIMES SHU", 0x31, "Cuneiform"),
    c(0x12184, None, "CUNEIFORM SIGN KA TIMES SIG", 0x31, "Cuneiform"),
    c(0x12185, None, "CUNEIFORM SIGN KA TIMES SUHUR", 0x31, "Cuneiform"),
    c(0x12186, None, "CUNEIFORM SIGN KA TIMES TAR", 0x31, "Cuneiform"),
    c(0x12187, None, "CUNEIFORM SIGN KA TIMES U", 0x31, "Cuneiform"),
    c(0x12188, None, "CUNEIFORM SIGN KA TIMES U2", 0x31, "Cuneiform"),
    c(0x12189, None, "CUNEIFORM SIGN KA TIMES UD", 0x31, "Cuneiform"),
    c(0x1218A, None, "CUNEIFORM SIGN KA TIMES UMUM TIMES PA", 0x31, "Cuneiform"),
    c(0x1218B, None, "CUNEIFORM SIGN KA TIMES USH", 0x31, "Cuneiform"),
    c(0x1218C, None, "CUNEIFORM SIGN KA TIMES ZI", 0x31, "Cuneiform"),
    c(0x1218D, None, "CUNEIFORM SIGN KA2", 0x31, "Cuneiform"),
    c(0x1218E, None, "CUNEIFORM SIGN KA2 CROSSING KA2", 0x31, "Cuneiform"),
    c(0x1218F, None, "CUNEIFORM SIGN KAB", 0x31, "Cuneiform"),
    c(0x12190, None, "CUNEIFORM SIGN KAD2", 0x31, "Cuneiform"),
    c(0x12191, None, "CUNEIFORM SIGN KAD3", 0x31, "Cuneiform"),
    c(0x12192, None, "CUNEIFORM SIGN KAD4", 0x31, "Cuneiform"),
    c(0x12193, None, "CUNEIFORM SIGN KAD5", 0x31, "Cuneiform"),
    c(0x12194, None, "CUNEIFORM SIGN KAD5 OVER KAD5", 0x31, "Cuneiform"),
    c(0x12195, None, "CUNEIFORM SIGN KAK", 0x31, "Cuneiform"),
    c(0x12196, None, "CUNEIFORM SIGN KAK TIMES IGI GUNU", 0x31, "Cuneiform"),
    c(0x12197, None, "CUNEIFORM SIGN KAL", 0x31, "Cuneiform"),
    c(0x12198, None, "CUNEIFORM SIGN KAL TIMES BAD", 0x31, "Cuneiform"),
    c(0x12199, None, "CUNEIFORM SIGN KAL CROSSING KAL", 0x31, "Cuneiform"),
    c(0x1219A, None, "CUNEIFORM SIGN KAM2", 0x31, "Cuneiform"),
    c(0x1219B, None, "CUNEIFORM SIGN KAM4", 0x31, "Cuneiform"),
    c(0x1219C, None, "CUNEIFORM SIGN KASKAL", 0x31, "Cuneiform"),
    c(0x1219D, None, "CUNEIFORM SIGN KASKAL LAGAB TIMES U OVER LAGAB TIMES U", 0x31, "Cuneiform"),
    c(0x1219E, None, "CUNEIFORM SIGN KASKAL OVER KASKAL LAGAB TIMES U OVER LAGAB TIMES U", 0x31, "Cuneiform"),
    c(0x1219F, None, "CUNEIFORM SIGN KESH2", 0x31, "Cuneiform"),
    c(0x121A0, None, "CUNEIFORM SIGN KI", 0x31, "Cuneiform"),
    c(0x121A1, None, "CUNEIFORM SIGN KI TIMES BAD", 0x31, "Cuneiform"),
    c(0x121A2, None, "CUNEIFORM SIGN KI TIMES U", 0x31, "Cuneiform"),
    c(0x121A3, None, "CUNEIFORM SIGN KI TIMES UD", 0x31, "Cuneiform"),
    c(0x121A4, None, "CUNEIFORM SIGN KID", 0x31, "Cuneiform"),
    c(0x121A5, None, "CUNEIFORM SIGN KIN", 0x31, "Cuneiform"),
    c(0x121A6, None, "CUNEIFORM SIGN KISAL", 0x31, "Cuneiform"),
    c(0x121A7, None, "CUNEIFORM SIGN KISH", 0x31, "Cuneiform"),
    c(0x121A8, None, "CUNEIFORM SIGN KISIM5", 0x31, "Cuneiform"),
    c(0x121A9, None, "CUNEIFORM SIGN KISIM5 OVER KISIM5", 0x31, "Cuneiform"),
    c(0x121AA, None, "CUNEIFORM SIGN KU", 0x31, "Cuneiform"),
    c(0x121AB, None, "CUNEIFORM SIGN KU OVER HI TIMES ASH2 KU OVER HI TIMES ASH2", 0x31, "Cuneiform"),
    c(0x121AC, None, "CUNEIFORM SIGN KU3", 0x31, "Cuneiform"),
    c(0x121AD, None, "CUNEIFORM SIGN KU4", 0x31, "Cuneiform"),
    c(0x121AE, None, "CUNEIFORM SIGN KU4 VARIANT FORM", 0x31, "Cuneiform"),
    c(0x121AF, None, "CUNEIFORM SIGN KU7", 0x31, "Cuneiform"),
    c(0x121B0, None, "CUNEIFORM SIGN KUL", 0x31, "Cuneiform"),
    c(0x121B1, None, "CUNEIFORM SIGN KUL GUNU", 0x31, "Cuneiform"),
    c(0x121B2, None, "CUNEIFORM SIGN KUN", 0x31, "Cuneiform"),
    c(0x121B3, None, "CUNEIFORM SIGN KUR", 0x31, "Cuneiform"),
    c(0x121B4, None, "CUNEIFORM SIGN KUR OPPOSING KUR", 0x31, "Cuneiform"),
    c(0x121B5, None, "CUNEIFORM SIGN KUSHU2", 0x31, "Cuneiform"),
    c(0x121B6, None, "CUNEIFORM SIGN KWU318", 0x31, "Cuneiform"),
    c(0x121B7, None, "CUNEIFORM SIGN LA", 0x31, "Cuneiform"),
    c(0x121B8, None, "CUNEIFORM SIGN LAGAB", 0x31, "Cuneiform"),
    c(0x121B9, None, "CUNEIFORM SIGN LAGAB TIMES A", 0x31, "Cuneiform"),
    c(0x121BA, None, "CUNEIFORM SIGN LAGAB TIMES A PLUS DA PLUS HA", 0x31, "Cuneiform"),
    c(0x121BB, None, "CUNEIFORM SIGN LAGAB TIMES A PLUS GAR", 0x31, "Cuneiform"),
    c(0x121BC, None, "CUNEIFORM SIGN LAGAB TIMES A PLUS LAL", 0x31, "Cuneiform"),
    c(0x121BD, None, "CUNEIFORM SIGN LAGAB TIMES AL", 0x31, "Cuneiform"),
    c(0x121BE, None, "CUNEIFORM SIGN LAGAB TIMES AN", 0x31, "Cuneiform"),
    c(0x121BF, None, "CUNEIFORM SIGN LAGAB TIMES ASH ZIDA TENU", 0x31, "Cuneiform"),
    c(0x121C0, None, "CUNEIFORM SIGN LAGAB TIMES BAD", 0x31, "Cuneiform"),
    c(0x121C1, None, "CUNEIFORM SIGN LAGAB TIMES BI", 0x31, "Cuneiform"),
    c(0x121C2, None, "CUNEIFORM SIGN LAGAB TIMES DAR", 0x31, "Cuneiform"),
    c(0x121C3, None, "CUNEIFORM SIGN LAGAB TIMES EN", 0x31, "Cuneiform"),
    c(0x121C4, None, "CUNEIFORM SIGN LAGAB TIMES GA", 0x31, "Cuneiform"),
    c(0x121C5, None, "CUNEIFORM SIGN LAGAB TIMES GAR", 0x31, "Cuneiform"),
    c(0x121C6, None, "CUNEIFORM SIGN LAGAB TIMES GUD", 0x31, "Cuneiform"),
    c(0x121C7, None, "CUNEIFORM SIGN LAGAB TIMES GUD PLUS GUD", 0x31, "Cuneiform"),
    c(0x121C8, None, "CUNEIFORM SIGN LAGAB TIMES HA", 0x31, "Cuneiform"),
    c(0x121C9, None, "CUNEIFORM SIGN LAGAB TIMES HAL", 0x31, "Cuneiform"),
    c(0x121CA, None, "CUNEIFORM SIGN LAGAB TIMES HI TIMES NUN", 0x31, "Cuneiform"),
    c(0x121CB, None, "CUNEIFORM SIGN LAGAB TIMES IGI GUNU", 0x31, "Cuneiform"),
    c(0x121CC, None, "CUNEIFORM SIGN LAGAB TIMES IM", 0x31, "Cuneiform"),
    c(0x121CD, None, "CUNEIFORM SIGN LAGAB TIMES IM PLUS HA", 0x31, "Cuneiform"),
    c(0x121CE, None, "CUNEIFORM SIGN LAGAB TIMES IM PLUS LU", 0x31, "Cuneiform"),
    c(0x121CF, None, "CUNEIFORM SIGN LAGAB TIMES KI", 0x31, "Cuneiform"),
    c(0x121D0, None, "CUNEIFORM SIGN LAGAB TIMES KIN", 0x31, "Cuneiform"),
    c(0x121D1, None, "CUNEIFORM SIGN LAGAB TIMES KU3", 0x31, "Cuneiform"),
    c(0x121D2, None, "CUNEIFORM SIGN LAGAB TIMES KUL", 0x31, "Cuneiform"),
    c(0x121D3, None, "CUNEIFORM SIGN LAGAB TIMES KUL PLUS HI PLUS A", 0x31, "Cuneiform"),
    c(0x121D4, None, "CUNEIFORM SIGN LAGAB TIMES LAGAB", 0x31, "Cuneiform"),
    c(0x121D5, None, "CUNEIFORM SIGN LAGAB TIMES LISH", 0x31, "Cuneiform"),
    c(0x121D6, None, "CUNEIFORM SIGN LAGAB TIMES LU", 0x31, "Cuneiform"),
    c(0x121D7, None, "CUNEIFORM SIGN LAGAB TIMES LUL", 0x31, "Cuneiform"),
    c(0x121D8, None, "CUNEIFORM SIGN LAGAB TIMES ME", 0x31, "Cuneiform"),
    c(0x121D9, None, "CUNEIFORM SIGN LAGAB TIMES ME PLUS EN", 0x31, "Cuneiform"),
    c(0x121DA, None, "CUNEIFORM SIGN LAGAB TIMES MUSH", 0x31, "Cuneiform"),
    c(0x121DB, None, "CUNEIFORM SIGN LAGAB TIMES NE", 0x31, "Cuneiform"),
    c(0x121DC, None, "CUNEIFORM SIGN LAGAB TIMES SHE PLUS SUM", 0x31, "Cuneiform"),
    c(0x121DD, None, "CUNEIFORM SIGN LAGAB TIMES SHITA PLUS GISH PLUS ERIN2", 0x31, "Cuneiform"),
    c(0x121DE, None, "CUNEIFORM SIGN LAGAB TIMES SHITA PLUS GISH TENU", 0x31, "Cuneiform"),
    c(0x121DF, None, "CUNEIFORM SIGN LAGAB TIMES SHU2", 0x31, "Cuneiform"),
    c(0x121E0, None, "CUNEIFORM SIGN LAGAB TIMES SHU2 PLUS SHU2", 0x31, "Cuneiform"),
    c(0x121E1, None, "CUNEIFORM SIGN LAGAB TIMES SUM", 0x31, "Cuneiform"),
    c(0x121E2, None, "CUNEIFORM SIGN LAGAB TIMES TAG", 0x31, "Cuneiform"),
    c(0x121E3, None, "CUNEIFORM SIGN LAGAB TIMES TAK4", 0x31, "Cuneiform"),
    c(0x121E4, None, "CUNEIFORM SIGN LAGAB TIMES TE PLUS A PLUS SU PLUS NA", 0x31, "Cuneiform"),
    c(0x121E5, None, "CUNEIFORM SIGN LAGAB TIMES U", 0x31, "Cuneiform"),
    c(0x121E6, None, "CUNEIFORM SIGN LAGAB TIMES U PLUS A", 0x31, "Cuneiform"),
    c(0x121E7, None, "CUNEIFORM SIGN LAGAB TIMES U PLUS U PLUS U", 0x31, "Cuneiform"),
    c(0x121E8, None, "CUNEIFORM SIGN LAGAB TIMES U2 PLUS ASH", 0x31, "Cuneiform"),
    c(0x121E9, None, "CUNEIFORM SIGN LAGAB TIMES UD", 0x31, "Cuneiform"),
    c(0x121EA, None, "CUNEIFORM SIGN LAGAB TIMES USH", 0x31, "Cuneiform"),
    c(0x121EB, None, "CUNEIFORM SIGN LAGAB SQUARED", 0x31, "Cuneiform"),
    c(0x121EC, None, "CUNEIFORM SIGN LAGAR", 0x31, "Cuneiform"),
    c(0x121ED, None, "CUNEIFORM SIGN LAGAR TIMES SHE", 0x31, "Cuneiform"),
    c(0x121EE, None, "CUNEIFORM SIGN LAGAR TIMES SHE PLUS SUM", 0x31, "Cuneiform"),
    c(0x121EF, None, "CUNEIFORM SIGN LAGAR GUNU", 0x31, "Cuneiform"),
    c(0x121F0, None, "CUNEIFORM SIGN LAGAR GUNU OVER LAGAR GUNU SHE", 0x31, "Cuneiform"),
    c(0x121F1, None, "CUNEIFORM SIGN LAHSHU", 0x31, "Cuneiform"),
    c(0x121F2, None, "CUNEIFORM SIGN LAL", 0x31, "Cuneiform"),
    c(0x121F3, None, "CUNEIFORM SIGN LAL TIMES LAL", 0x31, "Cuneiform"),
    c(0x121F4, None, "CUNEIFORM SIGN LAM", 0x31, "Cuneiform"),
    c(0x121F5, None, "CUNEIFORM SIGN LAM TIMES KUR", 0x31, "Cuneiform"),
    c(0x121F6, None, "CUNEIFORM SIGN LAM TIMES KUR PLUS RU", 0x31, "Cuneiform"),
    c(0x121F7, None, "CUNEIFORM SIGN LI", 0x31, "Cuneiform"),
    c(0x121F8, None, "CUNEIFORM SIGN LIL", 0x31, "Cuneiform"),
    c(0x121F9, None, "CUNEIFORM SIGN LIMMU2", 0x31, "Cuneiform"),
    c(0x121FA, None, "CUNEIFORM SIGN LISH", 0x31, "Cuneiform"),
    c(0x121FB, None, "CUNEIFORM SIGN LU", 0x31, "Cuneiform"),
    c(0x121FC, None, "CUNEIFORM SIGN LU TIMES BAD", 0x31, "Cuneiform"),
    c(0x121FD, None, "CUNEIFORM SIGN LU2", 0x31, "Cuneiform"),
    c(0x121FE, None, "CUNEIFORM SIGN LU2 TIMES AL", 0x31, "Cuneiform"),
    c(0x121FF, None, "CUNEIFORM SIGN LU2 TIMES BAD", 0x31, "Cuneiform"),
    c(0x12200, None, "CUNEIFORM SIGN LU2 TIMES ESH2", 0x31, "Cuneiform"),
    c(0x12201, None, "CUNEIFORM SIGN LU2 TIMES ESH2 TENU", 0x31, "Cuneiform"),
    c(0x12202, None, "CUNEIFORM SIGN LU2 TIMES GAN2 TENU", 0x31, "Cuneiform"),
    c(0x12203, None, "CUNEIFORM SIGN LU2 TIMES HI TIMES BAD", 0x31, "Cuneiform"),
    c(0x12204, None, "CUNEIFORM SIGN LU2 TIMES IM", 0x31, "Cuneiform"),
    c(0x12205, None, "CUNEIFORM SIGN LU2 TIMES KAD2", 0x31, "Cuneiform"),
    c(0x12206, None, "CUNEIFORM SIGN LU2 TIMES KAD3", 0x31, "Cuneiform"),
    c(0x12207, None, "CUNEIFORM SIGN LU2 TIMES KAD3 PLUS ASH", 0x31, "Cuneiform"),
    c(0x12208, None, "CUNEIFORM SIGN LU2 TIMES KI", 0x31, "Cuneiform"),
    c(0x12209, None, "CUNEIFORM SIGN LU2 TIMES LA PLUS ASH", 0x31, "Cuneiform"),
    c(0x1220A, None, "CUNEIFORM SIGN LU2 TIMES LAGAB", 0x31, "Cuneiform"),
    c(0x1220B, None, "CUNEIFORM SIGN LU2 TIMES ME PLUS EN", 0x31, "Cuneiform"),
    c(0x1220C, None, "CUNEIFORM SIGN LU2 TIMES NE", 0x31, "Cuneiform"),
    c(0x1220D, None, "CUNEIFORM SIGN LU2 TIMES NU", 0x31, "Cuneiform"),
    c(0x1220E, None, "CUNEIFORM SIGN LU2 TIMES SI PLUS ASH", 0x31, "Cuneiform"),
    c(0x1220F, None, "CUNEIFORM SIGN LU2 TIMES SIK2 PLUS BU", 0x31, "Cuneiform"),
    c(0x12210, None, "CUNEIFORM SIGN LU2 TIMES TUG2", 0x31, "Cuneiform"),
    c(0x12211, None, "CUNEIFORM SIGN LU2 TENU", 0x31, "Cuneiform"),
    c(0x12212, None, "CUNEIFORM SIGN LU2 CROSSING LU2", 0x31, "Cuneiform"),
    c(0x12213, None, "CUNEIFORM SIGN LU2 OPPOSING LU2", 0x31, "Cuneiform"),
    c(0x12214, None, "CUNEIFORM SIGN LU2 SQUARED", 0x31, "Cuneiform"),
    c(0x12215, None, "CUNEIFORM SIGN LU2 SHESHIG", 0x31, "Cuneiform"),
    c(0x12216, None, "CUNEIFORM SIGN LU3", 0x31, "Cuneiform"),
    c(0x12217, None, "CUNEIFORM SIGN LUGAL", 0x31, "Cuneiform"),
    c(0x12218, None, "CUNEIFORM SIGN LUGAL OVER LUGAL", 0x31, "Cuneiform"),
    c(0x12219, None, "CUNEIFORM SIGN LUGAL OPPOSING LUGAL", 0x31, "Cuneiform"),
    c(0x1221A, None, "CUNEIFORM SIGN LUGAL SHESHIG", 0x31, "Cuneiform"),
    c(0x1221B, None, "CUNEIFORM SIGN LUH", 0x31, "Cuneiform"),
    c(0x1221C, None, "CUNEIFORM SIGN LUL", 0x31, "Cuneiform"),
    c(0x1221D, None, "CUNEIFORM SIGN LUM", 0x31, "Cuneiform"),
    c(0x1221E, None, "CUNEIFORM SIGN LUM OVER LUM", 0x31, "Cuneiform"),
    c(0x1221F, None, "CUNEIFORM SIGN LUM OVER LUM GAR OVER GAR", 0x31, "Cuneiform"),
    c(0x12220, None, "CUNEIFORM SIGN MA", 0x31, "Cuneiform"),
    c(0x12221, None, "CUNEIFORM SIGN MA TIMES TAK4", 0x31, "Cuneiform"),
    c(0x12222, None, "CUNEIFORM SIGN MA GUNU", 0x31, "Cuneiform"),
    c(0x12223, None, "CUNEIFORM SIGN MA2", 0x31, "Cuneiform"),
    c(0x12224, None, "CUNEIFORM SIGN MAH", 0x31, "Cuneiform"),
    c(0x12225, None, "CUNEIFORM SIGN MAR", 0x31, "Cuneiform"),
    c(0x12226, None, "CUNEIFORM SIGN MASH", 0x31, "Cuneiform"),
    c(0x12227, None, "CUNEIFORM SIGN MASH2", 0x31, "Cuneiform"),
    c(0x12228, None, "CUNEIFORM SIGN ME", 0x31, "Cuneiform"),
    c(0x12229, None, "CUNEIFORM SIGN MES", 0x31, "Cuneiform"),
    c(0x1222A, None, "CUNEIFORM SIGN MI", 0x31, "Cuneiform"),
    c(0x1222B, None, "CUNEIFORM SIGN MIN", 0x31, "Cuneiform"),
    c(0x1222C, None, "CUNEIFORM SIGN MU", 0x31, "Cuneiform"),
    c(0x1222D, None, "CUNEIFORM SIGN MU OVER MU", 0x31, "Cuneiform"),
    c(0x1222E, None, "CUNEIFORM SIGN MUG", 0x31, "Cuneiform"),
    c(0x1222F, None, "CUNEIFORM SIGN MUG GUNU", 0x31, "Cuneiform"),
    c(0x12230, None, "CUNEIFORM SIGN MUNSUB", 0x31, "Cuneiform"),
    c(0x12231, None, "CUNEIFORM SIGN MURGU2", 0x31, "Cuneiform"),
    c(0x12232, None, "CUNEIFORM SIGN MUSH", 0x31, "Cuneiform"),
    c(0x12233, None, "CUNEIFORM SIGN MUSH TIMES A", 0x31, "Cuneiform"),
    c(0x12234, None, "CUNEIFORM SIGN MUSH TIMES KUR", 0x31, "Cuneiform"),
    c(0x12235, None, "CUNEIFORM SIGN MUSH TIMES ZA", 0x31, "Cuneiform"),
    c(0x12236, None, "CUNEIFORM SIGN MUSH OVER MUSH", 0x31, "Cuneiform"),
    c(0x12237, None, "CUNEIFORM SIGN MUSH OVER MUSH TIMES A PLUS NA", 0x31, "Cuneiform"),
    c(0x12238, None, "CUNEIFORM SIGN MUSH CROSSING MUSH", 0x31, "Cuneiform"),
    c(0x12239, None, "CUNEIFORM SIGN MUSH3", 0x31, "Cuneiform"),
    c(0x1223A, None, "CUNEIFORM SIGN MUSH3 TIMES A", 0x31, "Cuneiform"),
    c(0x1223B, None, "CUNEIFORM SIGN MUSH3 TIMES A PLUS DI", 0x31, "Cuneiform"),
    c(0x1223C, None, "CUNEIFORM SIGN MUSH3 TIMES DI", 0x31, "Cuneiform"),
    c(0x1223D, None, "CUNEIFORM SIGN MUSH3 GUNU", 0x31, "Cuneiform"),
    c(0x1223E, None, "CUNEIFORM SIGN NA", 0x31, "Cuneiform"),
    c(0x1223F, None, "CUNEIFORM SIGN NA2", 0x31, "Cuneiform"),
    c(0x12240, None, "CUNEIFORM SIGN NAGA", 0x31, "Cuneiform"),
    c(0x12241, None, "CUNEIFORM SIGN NAGA INVERTED", 0x31, "Cuneiform"),
    c(0x12242, None, "CUNEIFORM SIGN NAGA TIMES SHU TENU", 0x31, "Cuneiform"),
    c(0x12243, None, "CUNEIFORM SIGN NAGA OPPOSING NAGA", 0x31, "Cuneiform"),
    c(0x12244, None, "CUNEIFORM SIGN NAGAR", 0x31, "Cuneiform"),
    c(0x12245, None, "CUNEIFORM SIGN NAM NUTILLU", 0x31, "Cuneiform"),
    c(0x12246, None, "CUNEIFORM SIGN NAM", 0x31, "Cuneiform"),
    c(0x12247, None, "CUNEIFORM SIGN NAM2", 0x31, "Cuneiform"),
    c(0x12248, None, "CUNEIFORM SIGN NE", 0x31, "Cuneiform"),
    c(0x12249, None, "CUNEIFORM SIGN NE TIMES A", 0x31, "Cuneiform"),
    c(0x1224A, None, "CUNEIFORM SIGN NE TIMES UD", 0x31, "Cuneiform"),
    c(0x1224B, None, "CUNEIFORM SIGN NE SHESHIG", 0x31, "Cuneiform"),
    c(0x1224C, None, "CUNEIFORM SIGN NI", 0x31, "Cuneiform"),
    c(0x1224D, None, "CUNEIFORM SIGN NI TIMES E", 0x31, "Cuneiform"),
    c(0x1224E, None, "CUNEIFORM SIGN NI2", 0x31, "Cuneiform"),
    c(0x1224F, None, "CUNEIFORM SIGN NIM", 0x31, "Cuneiform"),
    c(0x12250, None, "CUNEIFORM SIGN NIM TIMES GAN2 TENU", 0x31, "Cuneiform"),
    c(0x12251, None, "CUNEIFORM SIGN NIM TIMES GAR PLUS GAN2 TENU", 0x31, "Cuneiform"),
    c(0x12252, None, "CUNEIFORM SIGN NINDA2", 0x31, "Cuneiform"),
    c(0x12253, None, "CUNEIFORM SIGN NINDA2 TIMES AN", 0x31, "Cuneiform"),
    c(0x12254, None, "CUNEIFORM SIGN NINDA2 TIMES ASH", 0x31, "Cuneiform"),
    c(0x12255, None, "CUNEIFORM SIGN NINDA2 TIMES ASH PLUS ASH", 0x31, "Cuneiform"),
    c(0x12256, None, "CUNEIFORM SIGN NINDA2 TIMES GUD", 0x31, "Cuneiform"),
    c(0x12257, None, "CUNEIFORM SIGN NINDA2 TIMES ME PLUS GAN2 TENU", 0x31, "Cuneiform"),
    c(0x12258, None, "CUNEIFORM SIGN NINDA2 TIMES NE", 0x31, "Cuneiform"),
    c(0x12259, None, "CUNEIFORM SIGN NINDA2 TIMES NUN", 0x31, "Cuneiform"),
    c(0x1225A, None, "CUNEIFORM SIGN NINDA2 TIMES SHE", 0x31, "Cuneiform"),
    c(0x1225B, None, "CUNEIFORM SIGN NINDA2 TIMES SHE PLUS A AN", 0x31, "Cuneiform"),
    c(0x1225C, None, "CUNEIFORM SIGN NINDA2 TIMES SHE PLUS ASH", 0x31, "Cuneiform"),
    c(0x1225D, None, "CUNEIFORM SIGN NINDA2 TIMES SHE PLUS ASH PLUS ASH", 0x31, "Cuneiform"),
    c(0x1225E, None, "CUNEIFORM SIGN NINDA2 TIMES U2 PLUS ASH", 0x31, "Cuneiform"),
    c(0x1225F, None, "CUNEIFORM SIGN NINDA2 TIMES USH", 0x31, "Cuneiform"),
    c(0x12260, None, "CUNEIFORM SIGN NISAG", 0x31, "Cuneiform"),
    c(0x12261, None, "CUNEIFORM SIGN NU", 0x31, "Cuneiform"),
    c(0x12262, None, "CUNEIFORM SIGN NU11", 0x31, "Cuneiform"),
    c(0x12263, None, "CUNEIFORM SIGN NUN", 0x31, "Cuneiform"),
    c(0x12264, None, "CUNEIFORM SIGN NUN LAGAR TIMES GAR", 0x31, "Cuneiform"),
    c(0x12265, None, "CUNEIFORM SIGN NUN LAGAR TIMES MASH", 0x31, "Cuneiform"),
    c(0x12266, None, "CUNEIFORM SIGN NUN LAGAR TIMES SAL", 0x31, "Cuneiform"),
    c(0x12267, None, "CUNEIFORM SIGN NUN LAGAR TIMES SAL OVER NUN LAGAR TIMES SAL", 0x31, "Cuneiform"),
    c(0x12268, None, "CUNEIFORM SIGN NUN LAGAR TIMES USH", 0x31, "Cuneiform"),
    c(0x12269, None, "CUNEIFORM SIGN NUN TENU", 0x31, "Cuneiform"),
    c(0x1226A, None, "CUNEIFORM SIGN NUN OVER NUN", 0x31, "Cuneiform"),
    c(0x1226B, None, "CUNEIFORM SIGN NUN CROSSING NUN", 0x31, "Cuneiform"),
    c(0x1226C, None, "CUNEIFORM SIGN NUN CROSSING NUN LAGAR OVER LAGAR", 0x31, "Cuneiform"),
    c(0x1226D, None, "CUNEIFORM SIGN NUNUZ", 0x31, "Cuneiform"),
    c(0x1226E, None, "CUNEIFORM SIGN NUNUZ AB2 TIMES ASHGAB", 0x31, "Cuneiform"),
    c(0x1226F, None, "CUNEIFORM SIGN NUNUZ AB2 TIMES BI", 0x31, "Cuneiform"),
    c(0x12270, None, "CUNEIFORM SIGN NUNUZ AB2 TIMES DUG", 0x31, "Cuneiform"),
    c(0x12271, None, "CUNEIFORM SIGN NUNUZ AB2 TIMES GUD", 0x31, "Cuneiform"),
    c(0x12272, None, "CUNEIFORM SIGN NUNUZ AB2 TIMES IGI GUNU", 0x31, "Cuneiform"),
    c(0x12273, None, "CUNEIFORM SIGN NUNUZ AB2 TIMES KAD3", 0x31, "Cuneiform"),
    c(0x12274, None, "CUNEIFORM SIGN NUNUZ AB2 TIMES LA", 0x31, "Cuneiform"),
    c(0x12275, None, "CUNEIFORM SIGN NUNUZ AB2 TIMES NE", 0x31, "Cuneiform"),
    c(0x12276, None, "CUNEIFORM SIGN NUNUZ AB2 TIMES SILA3", 0x31, "Cuneiform"),
    c(0x12277, None, "CUNEIFORM SIGN NUNUZ AB2 TIMES U2", 0x31, "Cuneiform"),
    c(0x12278, None, "CUNEIFORM SIGN NUNUZ KISIM5 TIMES BI", 0x31, "Cuneiform"),
    c(0x12279, None, "CUNEIFORM SIGN NUNUZ KISIM5 TIMES BI U", 0x31, "Cuneiform"),
    c(0x1227A, None, "CUNEIFORM SIGN PA", 0x31, "Cuneiform"),
    c(0x1227B, None, "CUNEIFORM SIGN PAD", 0x31, "Cuneiform"),
    c(0x1227C, None, "CUNEIFORM SIGN PAN", 0x31, "Cuneiform"),
    c(0x1227D, None, "CUNEIFORM SIGN PAP", 0x31, "Cuneiform"),
    c(0x1227E, None, "CUNEIFORM SIGN PESH2", 0x31, "Cuneiform"),
    c(0x1227F, None, "CUNEIFORM SIGN PI", 0x31, "Cuneiform"),
    c(0x12280, None, "CUNEIFORM SIGN PI TIMES A", 0x31, "Cuneiform"),
    c(0x12281, None, "CUNEIFORM SIGN PI TIMES AB", 0x31, "Cuneiform"),
    c(0x12282, None, "CUNEIFORM SIGN PI TIMES BI", 0x31, "Cuneiform"),
    c(0x12283, None, "CUNEIFORM SIGN PI TIMES BU", 0x31, "Cuneiform"),
    c(0x12284, None, "CUNEIFORM SIGN PI TIMES E", 0x31, "Cuneiform"),
    c(0x12285, None, "CUNEIFORM SIGN PI TIMES I", 0x31, "Cuneiform"),
    c(0x12286, None, "CUNEIFORM SIGN PI TIMES IB", 0x31, "Cuneiform"),
    c(0x12287, None, "CUNEIFORM SIGN PI TIMES U", 0x31, "Cuneiform"),
    c(0x12288, None, "CUNEIFORM SIGN PI TIMES U2", 0x31, "Cuneiform"),
    c(0x12289, None, "CUNEIFORM SIGN PI CROSSING PI", 0x31, "Cuneiform"),
    c(0x1228A, None, "CUNEIFORM SIGN PIRIG", 0x31, "Cuneiform"),
    c(0x1228B, None, "CUNEIFORM SIGN PIRIG TIMES KAL", 0x31, "Cuneiform"),
    c(0x1228C, None, "CUNEIFORM SIGN PIRIG TIMES UD", 0x31, "Cuneiform"),
    c(0x1228D, None, "CUNEIFORM SIGN PIRIG TIMES ZA", 0x31, "Cuneiform"),
    c(0x1228E, None, "CUNEIFORM SIGN PIRIG OPPOSING PIRIG", 0x31, "Cuneiform"),
    c(0x1228F, None, "CUNEIFORM SIGN RA", 0x31, "Cuneiform"),
    c(0x12290, None, "CUNEIFORM SIGN RAB", 0x31, "Cuneiform"),
    c(0x12291, None, "CUNEIFORM SIGN RI", 0x31, "Cuneiform"),
    c(0x12292, None, "CUNEIFORM SIGN RU", 0x31, "Cuneiform"),
    c(0x12293, None, "CUNEIFORM SIGN SA", 0x31, "Cuneiform"),
    c(0x12294, None, "CUNEIFORM SIGN SAG NUTILLU", 0x31, "Cuneiform"),
    c(0x12295, None, "CUNEIFORM SIGN SAG", 0x31, "Cuneiform"),
    c(0x12296, None, "CUNEIFORM SIGN SAG TIMES A", 0x31, "Cuneiform"),
    c(0x12297, None, "CUNEIFORM SIGN SAG TIMES DU", 0x31, "Cuneiform"),
    c(0x12298, None, "CUNEIFORM SIGN SAG TIMES DUB", 0x31, "Cuneiform"),
    c(0x12299, None, "CUNEIFORM SIGN SAG TIMES HA", 0x31, "Cuneiform"),
    c(0x1229A, None, "CUNEIFORM SIGN SAG TIMES KAK", 0x31, "Cuneiform"),
    c(0x1229B, None, "CUNEIFORM SIGN SAG TIMES KUR", 0x31, "Cuneiform"),
    c(0x1229C, None, "CUNEIFORM SIGN SAG TIMES LUM", 0x31, "Cuneiform"),
    c(0x1229D, None, "CUNEIFORM SIGN SAG TIMES MI", 0x31, "Cuneiform"),
    c(0x1229E, None, "CUNEIFORM SIGN SAG TIMES NUN", 0x31, "Cuneiform"),
    c(0x1229F, None, "CUNEIFORM SIGN SAG TIMES SAL", 0x31, "Cuneiform"),
    c(0x122A0, None, "CUNEIFORM SIGN SAG TIMES SHID", 0x31, "Cuneiform"),
    c(0x122A1, None, "CUNEIFORM SIGN SAG TIMES TAB", 0x31, "Cuneiform"),
    c(0x122A2, None, "CUNEIFORM SIGN SAG TIMES U2", 0x31, "Cuneiform"),
    c(0x122A3, None, "CUNEIFORM SIGN SAG TIMES UB", 0x31, "Cuneiform"),
    c(0x122A4, None, "CUNEIFORM SIGN SAG TIMES UM", 0x31, "Cuneiform"),
    c(0x122A5, None, "CUNEIFORM SIGN SAG TIMES UR", 0x31, "Cuneiform"),
    c(0x122A6, None, "CUNEIFORM SIGN SAG TIMES USH", 0x31, "Cuneiform"),
    c(0x122A7, None, "CUNEIFORM SIGN SAG OVER SAG", 0x31, "Cuneiform"),
    c(0x122A8, None, "CUNEIFORM SIGN SAG GUNU", 0x31, "Cuneiform"),
    c(0x122A9, None, "CUNEIFORM SIGN SAL", 0x31, "Cuneiform"),
    c(0x122AA, None, "CUNEIFORM SIGN SAL LAGAB TIMES ASH2", 0x31, "Cuneiform"),
    c(0x122AB, None, "CUNEIFORM SIGN SANGA2", 0x31, "Cuneiform"),
    c(0x122AC, None, "CUNEIFORM SIGN SAR", 0x31, "Cuneiform"),
    c(0x122AD, None, "CUNEIFORM SIGN SHA", 0x31, "Cuneiform"),
    c(0x122AE, None, "CUNEIFORM SIGN SHA3", 0x31, "Cuneiform"),
    c(0x122AF, None, "CUNEIFORM SIGN SHA3 TIMES A", 0x31, "Cuneiform"),
    c(0x122B0, None, "CUNEIFORM SIGN SHA3 TIMES BAD", 0x31, "Cuneiform"),
    c(0x122B1, None, "CUNEIFORM SIGN SHA3 TIMES GISH", 0x31, "Cuneiform"),
    c(0x122B2, None, "CUNEIFORM SIGN SHA3 TIMES NE", 0x31, "Cuneiform"),
    c(0x122B3, None, "CUNEIFORM SIGN SHA3 TIMES SHU2", 0x31, "Cuneiform"),
    c(0x122B4, None, "CUNEIFORM SIGN SHA3 TIMES TUR", 0x31, "Cuneiform"),
    c(0x122B5, None, "CUNEIFORM SIGN SHA3 TIMES U", 0x31, "Cuneiform"),
    c(0x122B6, None, "CUNEIFORM SIGN SHA3 TIMES U PLUS A", 0x31, "Cuneiform"),
    c(0x122B7, None, "CUNEIFORM SIGN SHA6", 0x31, "Cuneiform"),
    c(0x122B8, None, "CUNEIFORM SIGN SHAB6", 0x31, "Cuneiform"),
    c(0x122B9, None, "CUNEIFORM SIGN SHAR2", 0x31, "Cuneiform"),
    c(0x122BA, None, "CUNEIFORM SIGN SHE", 0x31, "Cuneiform"),
    c(0x122BB, None, "CUNEIFORM SIGN SHE HU", 0x31, "Cuneiform"),
    c(0x122BC, None, "CUNEIFORM SIGN SHE OVER SHE GAD OVER GAD GAR OVER GAR", 0x31, "Cuneiform"),
    c(0x122BD, None, "CUNEIFORM SIGN SHE OVER SHE TAB OVER TAB GAR OVER GAR", 0x31, "Cuneiform"),
    c(0x122BE, None, "CUNEIFORM SIGN SHEG9", 0x31, "Cuneiform"),
    c(0x122BF, None, "CUNEIFORM SIGN SHEN", 0x31, "Cuneiform"),
    c(0x122C0, None, "CUNEIFORM SIGN SHESH", 0x31, "Cuneiform"),
    c(0x122C1, None, "CUNEIFORM SIGN SHESH2", 0x31, "Cuneiform"),
    c(0x122C2, None, "CUNEIFORM SIGN SHESHLAM", 0x31, "Cuneiform"),
    c(0x122C3, None, "CUNEIFORM SIGN SHID", 0x31, "Cuneiform"),
    c(0x122C4, None, "CUNEIFORM SIGN SHID TIMES A", 0x31, "Cuneiform"),
    c(0x122C5, None, "CUNEIFORM SIGN SHID TIMES IM", 0x31, "Cuneiform"),
    c(0x122C6, None, "CUNEIFORM SIGN SHIM", 0x31, "Cuneiform"),
    c(0x122C7, None, "CUNEIFORM SIGN SHIM TIMES A", 0x31, "Cuneiform"),
    c(0x122C8, None, "CUNEIFORM SIGN SHIM TIMES BAL", 0x31, "Cuneiform"),
    c(0x122C9, None, "CUNEIFORM SIGN SHIM TIMES BULUG", 0x31, "Cuneiform"),
    c(0x122CA, None, "CUNEIFORM SIGN SHIM TIMES DIN", 0x31, "Cuneiform"),
    c(0x122CB, None, "CUNEIFORM SIGN SHIM TIMES GAR", 0x31, "Cuneiform"),
    c(0x122CC, None, "CUNEIFORM SIGN SHIM TIMES IGI", 0x31, "Cuneiform"),
    c(0x122CD, None, "CUNEIFORM SIGN SHIM TIMES IGI GUNU", 0x31, "Cuneiform"),
    c(0x122CE, None, "CUNEIFORM SIGN SHIM TIMES KUSHU2", 0x31, "Cuneiform"),
    c(0x122CF, None, "CUNEIFORM SIGN SHIM TIMES LUL", 0x31, "Cuneiform"),
    c(0x122D0, None, "CUNEIFORM SIGN SHIM TIMES MUG", 0x31, "Cuneiform"),
    c(0x122D1, None, "CUNEIFORM SIGN SHIM TIMES SAL", 0x31, "Cuneiform"),
    c(0x122D2, None, "CUNEIFORM SIGN SHINIG", 0x31, "Cuneiform"),
    c(0x122D3, None, "CUNEIFORM SIGN SHIR", 0x31, "Cuneiform"),
    c(0x122D4, None, "CUNEIFORM SIGN NU11 TENU", 0x31, "Cuneiform"),
    c(0x122D5, None, "CUNEIFORM SIGN NU11 OVER NU11 BUR OVER BUR", 0x31, "Cuneiform"),
    c(0x122D6, None, "CUNEIFORM SIGN SHITA", 0x31, "Cuneiform"),
    c(0x122D7, None, "CUNEIFORM SIGN SHU", 0x31, "Cuneiform"),
    c(0x122D8, None, "CUNEIFORM SIGN SHU OVER INVERTED SHU", 0x31, "Cuneiform"),
    c(0x122D9, None, "CUNEIFORM SIGN SHU2", 0x31, "Cuneiform"),
    c(0x122DA, None, "CUNEIFORM SIGN SHUBUR", 0x31, "Cuneiform"),
    c(0x122DB, None, "CUNEIFORM SIGN SI", 0x31, "Cuneiform"),
    c(0x122DC, None, "CUNEIFORM SIGN SI GUNU", 0x31, "Cuneiform"),
    c(0x122DD, None, "CUNEIFORM SIGN SIG", 0x31, "Cuneiform"),
    c(0x122DE, None, "CUNEIFORM SIGN SIG4", 0x31, "Cuneiform"),
    c(0x122DF, None, "CUNEIFORM SIGN SIG4 OVER SIG4 SHU2", 0x31, "Cuneiform"),
    c(0x122E0, None, "CUNEIFORM SIGN SIK2", 0x31, "Cuneiform"),
    c(0x122E1, None, "CUNEIFORM SIGN SILA3", 0x31, "Cuneiform"),
    c(0x122E2, None, "CUNEIFORM SIGN SU", 0x31, "Cuneiform"),
    c(0x122E3, None, "CUNEIFORM SIGN SU OVER SU", 0x31, "Cuneiform"),
    c(0x122E4, None, "CUNEIFORM SIGN SUD", 0x31, "Cuneiform"),
    c(0x122E5, None, "CUNEIFORM SIGN SUD2", 0x31, "Cuneiform"),
    c(0x122E6, None, "CUNEIFORM SIGN SUHUR", 0x31, "Cuneiform"),
    c(0x122E7, None, "CUNEIFORM SIGN SUM", 0x31, "Cuneiform"),
    c(0x122E8, None, "CUNEIFORM SIGN SUMASH", 0x31, "Cuneiform"),
    c(0x122E9, None, "CUNEIFORM SIGN SUR", 0x31, "Cuneiform"),
    c(0x122EA, None, "CUNEIFORM SIGN SUR9", 0x31, "Cuneiform"),
    c(0x122EB, None, "CUNEIFORM SIGN TA", 0x31, "Cuneiform"),
    c(0x122EC, None, "CUNEIFORM SIGN TA ASTERISK", 0x31, "Cuneiform"),
    c(0x122ED, None, "CUNEIFORM SIGN TA TIMES HI", 0x31, "Cuneiform"),
    c(0x122EE, None, "CUNEIFORM SIGN TA TIMES MI", 0x31, "Cuneiform"),
    c(0x122EF, None, "CUNEIFORM SIGN TA GUNU", 0x31, "Cuneiform"),
    c(0x122F0, None, "CUNEIFORM SIGN TAB", 0x31, "Cuneiform"),
    c(0x122F1, None, "CUNEIFORM SIGN TAB OVER TAB NI OVER NI DISH OVER DISH", 0x31, "Cuneiform"),
    c(0x122F2, None, "CUNEIFORM SIGN TAB SQUARED", 0x31, "Cuneiform"),
    c(0x122F3, None, "CUNEIFORM SIGN TAG", 0x31, "Cuneiform"),
    c(0x122F4, None, "CUNEIFORM SIGN TAG TIMES BI", 0x31, "Cuneiform"),
    c(0x122F5, None, "CUNEIFORM SIGN TAG TIMES GUD", 0x31, "Cuneiform"),
    c(0x122F6, None, "CUNEIFORM SIGN TAG TIMES SHE", 0x31, "Cuneiform"),
    c(0x122F7, None, "CUNEIFORM SIGN TAG TIMES SHU", 0x31, "Cuneiform"),
    c(0x122F8, None, "CUNEIFORM SIGN TAG TIMES TUG2", 0x31, "Cuneiform"),
    c(0x122F9, None, "CUNEIFORM SIGN TAG TIMES UD", 0x31, "Cuneiform"),
    c(0x122FA, None, "CUNEIFORM SIGN TAK4", 0x31, "Cuneiform"),
    c(0x122FB, None, "CUNEIFORM SIGN TAR", 0x31, "Cuneiform"),
    c(0x122FC, None, "CUNEIFORM SIGN TE", 0x31, "Cuneiform"),
    c(0x122FD, None, "CUNEIFORM SIGN TE GUNU", 0x31, "Cuneiform"),
    c(0x122FE, None, "CUNEIFORM SIGN TI", 0x31, "Cuneiform"),
    c(0x122FF, None, "CUNEIFORM SIGN TI TENU", 0x31, "Cuneiform"),
    c(0x12300, None, "CUNEIFORM SIGN TIL", 0x31, "Cuneiform"),
    c(0x12301, None, "CUNEIFORM SIGN TIR", 0x31, "Cuneiform"),
    c(0x12302, None, "CUNEIFORM SIGN TIR TIMES TAK4", 0x31, "Cuneiform"),
    c(0x12303, None, "CUNEIFORM SIGN TIR OVER TIR", 0x31, "Cuneiform"),
    c(0x12304, None, "CUNEIFORM SIGN TIR OVER TIR GAD OVER GAD GAR OVER GAR", 0x31, "Cuneiform"),
    c(0x12305, None, "CUNEIFORM SIGN TU", 0x31, "Cuneiform"),
    c(0x12306, None, "CUNEIFORM SIGN TUG2", 0x31, "Cuneiform"),
    c(0x12307, None, "CUNEIFORM SIGN TUK", 0x31, "Cuneiform"),
    c(0x12308, None, "CUNEIFORM SIGN TUM", 0x31, "Cuneiform"),
    c(0x12309, None, "CUNEIFORM SIGN TUR", 0x31, "Cuneiform"),
    c(0x1230A, None, "CUNEIFORM SIGN TUR OVER TUR ZA OVER ZA", 0x31, "Cuneiform"),
    c(0x1230B, None, "CUNEIFORM SIGN U", 0x31, "Cuneiform"),
    c(0x1230C, None, "CUNEIFORM SIGN U GUD", 0x31, "Cuneiform"),
    c(0x1230D, None, "CUNEIFORM SIGN U U U", 0x31, "Cuneiform"),
    c(0x1230E, None, "CUNEIFORM SIGN U OVER U PA OVER PA GAR OVER GAR", 0x31, "Cuneiform"),
    c(0x1230F, None, "CUNEIFORM SIGN U OVER U SUR OVER SUR", 0x31, "Cuneiform"),
    c(0x12310, None, "CUNEIFORM SIGN U OVER U U REVERSED OVER U REVERSED", 0x31, "Cuneiform"),
    c(0x12311, None, "CUNEIFORM SIGN U2", 0x31, "Cuneiform"),
    c(0x12312, None, "CUNEIFORM SIGN UB", 0x31, "Cuneiform"),
    c(0x12313, None, "CUNEIFORM SIGN UD", 0x31, "Cuneiform"),
    c(0x12314, None, "CUNEIFORM SIGN UD KUSHU2", 0x31, "Cuneiform"),
    c(0x12315, None, "CUNEIFORM SIGN UD TIMES BAD", 0x31, "Cuneiform"),
    c(0x12316, None, "CUNEIFORM SIGN UD TIMES MI", 0x31, "Cuneiform"),
    c(0x12317, None, "CUNEIFORM SIGN UD TIMES U PLUS U PLUS U", 0x31, "Cuneiform"),
    c(0x12318, None, "CUNEIFORM SIGN UD TIMES U PLUS U PLUS U GUNU", 0x31, "Cuneiform"),
    c(0x12319, None, "CUNEIFORM SIGN UD GUNU", 0x31, "Cuneiform"),
    c(0x1231A, None, "CUNEIFORM SIGN UD SHESHIG", 0x31, "Cuneiform"),
    c(0x1231B, None, "CUNEIFORM SIGN UD SHESHIG TIMES BAD", 0x31, "Cuneiform"),
    c(0x1231C, None, "CUNEIFORM SIGN UDUG", 0x31, "Cuneiform"),
    c(0x1231D, None, "CUNEIFORM SIGN UM", 0x31, "Cuneiform"),
    c(0x1231E, None, "CUNEIFORM SIGN UM TIMES LAGAB", 0x31, "Cuneiform"),
    c(0x1231F, None, "CUNEIFORM SIGN UM TIMES ME PLUS DA", 0x31, "Cuneiform"),
    c(0x12320, None, "CUNEIFORM SIGN UM TIMES SHA3", 0x31, "Cuneiform"),
    c(0x12321, None, "CUNEIFORM SIGN UM TIMES U", 0x31, "Cuneiform"),
    c(0x12322, None, "CUNEIFORM SIGN UMBIN", 0x31, "Cuneiform"),
    c(0x12323, None, "CUNEIFORM SIGN UMUM", 0x31, "Cuneiform"),
    c(0x12324, None, "CUNEIFORM SIGN UMUM TIMES KASKAL", 0x31, "Cuneiform"),
    c(0x12325, None, "CUNEIFORM SIGN UMUM TIMES PA", 0x31, "Cuneiform"),
    c(0x12326, None, "CUNEIFORM SIGN UN", 0x31, "Cuneiform"),
    c(0x12327, None, "CUNEIFORM SIGN UN GUNU", 0x31, "Cuneiform"),
    c(0x12328, None, "CUNEIFORM SIGN UR", 0x31, "Cuneiform"),
    c(0x12329, None, "CUNEIFORM SIGN UR CROSSING UR", 0x31, "Cuneiform"),
    c(0x1232A, None, "CUNEIFORM SIGN UR SHESHIG", 0x31, "Cuneiform"),
    c(0x1232B, None, "CUNEIFORM SIGN UR2", 0x31, "Cuneiform"),
    c(0x1232C, None, "CUNEIFORM SIGN UR2 TIMES A PLUS HA", 0x31, "Cuneiform"),
    c(0x1232D, None, "CUNEIFORM SIGN UR2 TIMES A PLUS NA", 0x31, "Cuneiform"),
    c(0x1232E, None, "CUNEIFORM SIGN UR2 TIMES AL", 0x31, "Cuneiform"),
    c(0x1232F, None, "CUNEIFORM SIGN UR2 TIMES HA", 0x31, "Cuneiform"),
    c(0x12330, None, "CUNEIFORM SIGN UR2 TIMES NUN", 0x31, "Cuneiform"),
    c(0x12331, None, "CUNEIFORM SIGN UR2 TIMES U2", 0x31, "Cuneiform"),
    c(0x12332, None, "CUNEIFORM SIGN UR2 TIMES U2 PLUS ASH", 0x31, "Cuneiform"),
    c(0x12333, None, "CUNEIFORM SIGN UR2 TIMES U2 PLUS BI", 0x31, "Cuneiform"),
    c(0x12334, None, "CUNEIFORM SIGN UR4", 0x31, "Cuneiform"),
    c(0x12335, None, "CUNEIFORM SIGN URI", 0x31, "Cuneiform"),
    c(0x12336, None, "CUNEIFORM SIGN URI3", 0x31, "Cuneiform"),
    c(0x12337, None, "CUNEIFORM SIGN URU", 0x31, "Cuneiform"),
    c(0x12338, None, "CUNEIFORM SIGN URU TIMES A", 0x31, "Cuneiform"),
    c(0x12339, None, "CUNEIFORM SIGN URU TIMES ASHGAB", 0x31, "Cuneiform"),
    c(0x1233A, None, "CUNEIFORM SIGN URU TIMES BAR", 0x31, "Cuneiform"),
    c(0x1233B, None, "CUNEIFORM SIGN URU TIMES DUN", 0x31, "Cuneiform"),
    c(0x1233C, None, "CUNEIFORM SIGN URU TIMES GA", 0x31, "Cuneiform"),
    c(0x1233D, None, "CUNEIFORM SIGN URU TIMES GAL", 0x31, "Cuneiform"),
    c(0x1233E, None, "CUNEIFORM SIGN URU TIMES GAN2 TENU", 0x31, "Cuneiform"),
    c(0x1233F, None, "CUNEIFORM SIGN URU TIMES GAR", 0x31, "Cuneiform"),
    c(0x12340, None, "CUNEIFORM SIGN URU TIMES GU", 0x31, "Cuneiform"),
    c(0x12341, None, "CUNEIFORM SIGN URU TIMES HA", 0x31, "Cuneiform"),
    c(0x12342, None, "CUNEIFORM SIGN URU TIMES IGI", 0x31, "Cuneiform"),
    c(0x12343, None, "CUNEIFORM SIGN URU TIMES IM", 0x31, "Cuneiform"),
    c(0x12344, None, "CUNEIFORM SIGN URU TIMES ISH", 0x31, "Cuneiform"),
    c(0x12345, None, "CUNEIFORM SIGN URU TIMES KI", 0x31, "Cuneiform"),
    c(0x12346, None, "CUNEIFORM SIGN URU TIMES LUM", 0x31, "Cuneiform"),
    c(0x12347, None, "CUNEIFORM SIGN URU TIMES MIN", 0x31, "Cuneiform"),
    c(0x12348, None, "CUNEIFORM SIGN URU TIMES PA", 0x31, "Cuneiform"),
    c(0x12349, None, "CUNEIFORM SIGN URU TIMES SHE", 0x31, "Cuneiform"),
    c(0x1234A, None, "CUNEIFORM SIGN URU TIMES SIG4", 0x31, "Cuneiform"),
    c(0x1234B, None, "CUNEIFORM SIGN URU TIMES TU", 0x31, "Cuneiform"),
    c(0x1234C, None, "CUNEIFORM SIGN URU TIMES U PLUS GUD", 0x31, "Cuneiform"),
    c(0x1234D, None, "CUNEIFORM SIGN URU TIMES UD", 0x31, "Cuneiform"),
    c(0x1234E, None, "CUNEIFORM SIGN URU TIMES URUDA", 0x31, "Cuneiform"),
    c(0x1234F, None, "CUNEIFORM SIGN URUDA", 0x31, "Cuneiform"),
    c(0x12350, None, "CUNEIFORM SIGN URUDA TIMES U", 0x31, "Cuneiform"),
    c(0x12351, None, "CUNEIFORM SIGN USH", 0x31, "Cuneiform"),
    c(0x12352, None, "CUNEIFORM SIGN USH TIMES A", 0x31, "Cuneiform"),
    c(0x12353, None, "CUNEIFORM SIGN USH TIMES KU", 0x31, "Cuneiform"),
    c(0x12354, None, "CUNEIFORM SIGN USH TIMES KUR", 0x31, "Cuneiform"),
    c(0x12355, None, "CUNEIFORM SIGN USH TIMES TAK4", 0x31, "Cuneiform"),
    c(0x12356, None, "CUNEIFORM SIGN USHX", 0x31, "Cuneiform"),
    c(0x12357, None, "CUNEIFORM SIGN USH2", 0x31, "Cuneiform"),
    c(0x12358, None, "CUNEIFORM SIGN USHUMX", 0x31, "Cuneiform"),
    c(0x12359, None, "CUNEIFORM SIGN UTUKI", 0x31, "Cuneiform"),
    c(0x1235A, None, "CUNEIFORM SIGN UZ3", 0x31, "Cuneiform"),
    c(0x1235B, None, "CUNEIFORM SIGN UZ3 TIMES KASKAL", 0x31, "Cuneiform"),
    c(0x1235C, None, "CUNEIFORM SIGN UZU", 0x31, "Cuneiform"),
    c(0x1235D, None, "CUNEIFORM SIGN ZA", 0x31, "Cuneiform"),
    c(0x1235E, None, "CUNEIFORM SIGN ZA TENU", 0x31, "Cuneiform"),
    c(0x1235F, None, "CUNEIFORM SIGN ZA SQUARED TIMES KUR", 0x31, "Cuneiform"),
    c(0x12360, None, "CUNEIFORM SIGN ZAG", 0x31, "Cuneiform"),
    c(0x12361, None, "CUNEIFORM SIGN ZAMX", 0x31, "Cuneiform"),
    c(0x12362, None, "CUNEIFORM SIGN ZE2", 0x31, "Cuneiform"),
    c(0x12363, None, "CUNEIFORM SIGN ZI", 0x31, "Cuneiform"),
    c(0x12364, None, "CUNEIFORM SIGN ZI OVER ZI", 0x31, "Cuneiform"),
    c(0x12365, None, "CUNEIFORM SIGN ZI3", 0x31, "Cuneiform"),
    c(0x12366, None, "CUNEIFORM SIGN ZIB", 0x31, "Cuneiform"),
    c(0x12367, None, "CUNEIFORM SIGN ZIB KABA TENU", 0x31, "Cuneiform"),
    c(0x12368, None, "CUNEIFORM SIGN ZIG", 0x31, "Cuneiform"),
    c(0x12369, None, "CUNEIFORM SIGN ZIZ2", 0x31, "Cuneiform"),
    c(0x1236A, None, "CUNEIFORM SIGN ZU", 0x31, "Cuneiform"),
    c(0x1236B, None, "CUNEIFORM SIGN ZU5", 0x31, "Cuneiform"),
    c(0x1236C, None, "CUNEIFORM SIGN ZU5 TIMES A", 0x31, "Cuneiform"),
    c(0x1236D, None, "CUNEIFORM SIGN ZUBUR", 0x31, "Cuneiform"),
    c(0x1236E, None, "CUNEIFORM SIGN ZUM", 0x31, "Cuneiform"),
    c(0x1236F, None, "CUNEIFORM SIGN KAP ELAMITE", 0x31, "Cuneiform"),
    c(0x12370, None, "CUNEIFORM SIGN AB TIMES NUN", 0x31, "Cuneiform"),
    c(0x12371, None, "CUNEIFORM SIGN AB2 TIMES A", 0x31, "Cuneiform"),
    c(0x12372, None, "CUNEIFORM SIGN AMAR TIMES KUG", 0x31, "Cuneiform"),
    c(0x12373, None, "CUNEIFORM SIGN DAG KISIM5 TIMES U2 PLUS MASH", 0x31, "Cuneiform"),
    c(0x12374, None, "CUNEIFORM SIGN DAG3", 0x31, "Cuneiform"),
    c(0x12375, None, "CUNEIFORM SIGN DISH PLUS SHU", 0x31, "Cuneiform"),
    c(0x12376, None, "CUNEIFORM SIGN DUB TIMES SHE", 0x31, "Cuneiform"),
    c(0x12377, None, "CUNEIFORM SIGN EZEN TIMES GUD", 0x31, "Cuneiform"),
    c(0x12378, None, "CUNEIFORM SIGN EZEN TIMES SHE", 0x31, "Cuneiform"),
    c(0x12379, None, "CUNEIFORM SIGN GA2 TIMES AN PLUS KAK PLUS A", 0x31, "Cuneiform"),
    c(0x1237A, None, "CUNEIFORM SIGN GA2 TIMES ASH2", 0x31, "Cuneiform"),
    c(0x1237B, None, "CUNEIFORM SIGN GE22", 0x31, "Cuneiform"),
    c(0x1237C, None, "CUNEIFORM SIGN GIG", 0x31, "Cuneiform"),
    c(0x1237D, None, "CUNEIFORM SIGN HUSH", 0x31, "Cuneiform"),
    c(0x1237E, None, "CUNEIFORM SIGN KA TIMES ANSHE", 0x31, "Cuneiform"),
    c(0x1237F, None, "CUNEIFORM SIGN KA TIMES ASH3", 0x31, "Cuneiform"),
    c(0x12380, None, "CUNEIFORM SIGN KA TIMES GISH", 0x31, "Cuneiform"),
    c(0x12381, None, "CUNEIFORM SIGN KA TIMES GUD", 0x31, "Cuneiform"),
    c(0x12382, None, "CUNEIFORM SIGN KA TIMES HI TIMES ASH2", 0x31, "Cuneiform"),
    c(0x12383, None, "CUNEIFORM SIGN KA TIMES LUM", 0x31, "Cuneiform"),
    c(0x12384, None, "CUNEIFORM SIGN KA TIMES PA", 0x31, "Cuneiform"),
    c(0x12385, None, "CUNEIFORM SIGN KA TIMES SHUL", 0x31, "Cuneiform"),
    c(0x12386, None, "CUNEIFORM SIGN KA TIMES TU", 0x31, "Cuneiform"),
    c(0x12387, None, "CUNEIFORM SIGN KA TIMES UR2", 0x31, "Cuneiform"),
    c(0x12388, None, "CUNEIFORM SIGN LAGAB TIMES GI", 0x31, "Cuneiform"),
    c(0x12389, None, "CUNEIFORM SIGN LU2 SHESHIG TIMES BAD", 0x31, "Cuneiform"),
    c(0x1238A, None, "CUNEIFORM SIGN LU2 TIMES ESH2 PLUS LAL", 0x31, "Cuneiform"),
    c(0x1238B, None, "CUNEIFORM SIGN LU2 TIMES SHU", 0x31, "Cuneiform"),
    c(0x1238C, None, "CUNEIFORM SIGN MESH", 0x31, "Cuneiform"),
    c(0x1238D, None, "CUNEIFORM SIGN MUSH3 TIMES ZA", 0x31, "Cuneiform"),
    c(0x1238E, None, "CUNEIFORM SIGN NA4", 0x31, "Cuneiform"),
    c(0x1238F, None, "CUNEIFORM SIGN NIN", 0x31, "Cuneiform"),
    c(0x12390, None, "CUNEIFORM SIGN NIN9", 0x31, "Cuneiform"),
    c(0x12391, None, "CUNEIFORM SIGN NINDA2 TIMES BAL", 0x31, "Cuneiform"),
    c(0x12392, None, "CUNEIFORM SIGN NINDA2 TIMES GI", 0x31, "Cuneiform"),
    c(0x12393, None, "CUNEIFORM SIGN NU11 ROTATED NINETY DEGREES", 0x31, "Cuneiform"),
    c(0x12394, None, "CUNEIFORM SIGN PESH2 ASTERISK", 0x31, "Cuneiform"),
    c(0x12395, None, "CUNEIFORM SIGN PIR2", 0x31, "Cuneiform"),
    c(0x12396, None, "CUNEIFORM SIGN SAG TIMES IGI GUNU", 0x31, "Cuneiform"),
    c(0x12397, None, "CUNEIFORM SIGN TI2", 0x31, "Cuneiform"),
    c(0x12398, None, "CUNEIFORM SIGN UM TIMES ME", 0x31, "Cuneiform"),
    c(0x12399, None, "CUNEIFORM SIGN U U", 0x31, "Cuneiform"),
    c(0x12400, None, "CUNEIFORM NUMERIC SIGN TWO ASH", 0x31, "Cuneiform_Numbers"),
    c(0x12401, None, "CUNEIFORM NUMERIC SIGN THREE ASH", 0x31, "Cuneiform_Numbers"),
    c(0x12402, None, "CUNEIFORM NUMERIC SIGN FOUR ASH", 0x31, "Cuneiform_Numbers"),
    c(0x12403, None, "CUNEIFORM NUMERIC SIGN FIVE ASH", 0x31, "Cuneiform_Numbers"),
    c(0x12404, None, "CUNEIFORM NUMERIC SIGN SIX ASH", 0x31, "Cuneiform_Numbers"),
    c(0x12405, None, "CUNEIFORM NUMERIC SIGN SEVEN ASH", 0x31, "Cuneiform_Numbers"),
    c(0x12406, None, "CUNEIFORM NUMERIC SIGN EIGHT ASH", 0x31, "Cuneiform_Numbers"),
    c(0x12407, None, "CUNEIFORM NUMERIC SIGN NINE ASH", 0x31, "Cuneiform_Numbers"),
    c(0x12408, None, "CUNEIFORM NUMERIC SIGN THREE DISH", 0x31, "Cuneiform_Numbers"),
    c(0x12409, None, "CUNEIFORM NUMERIC SIGN FOUR DISH", 0x31, "Cuneiform_Numbers"),
    c(0x1240A, None, "CUNEIFORM NUMERIC SIGN FIVE DISH", 0x31, "Cuneiform_Numbers"),
    c(0x1240B, None, "CUNEIFORM NUMERIC SIGN SIX DISH", 0x31, "Cuneiform_Numbers"),
    c(0x1240C, None, "CUNEIFORM NUMERIC SIGN SEVEN DISH", 0x31, "Cuneiform_Numbers"),
    c(0x1240D, None, "CUNEIFORM NUMERIC SIGN EIGHT DISH", 0x31, "Cuneiform_Numbers"),
    c(0x1240E, None, "CUNEIFORM NUMERIC SIGN NINE DISH", 0x31, "Cuneiform_Numbers"),
    c(0x1240F, None, "CUNEIFORM NUMERIC SIGN FOUR U", 0x31, "Cuneiform_Numbers"),
    c(0x12410, None, "CUNEIFORM NUMERIC SIGN FIVE U", 0x31, "Cuneiform_Numbers"),
    c(0x12411, None, "CUNEIFORM NUMERIC SIGN SIX U", 0x31, "Cuneiform_Numbers"),
    c(0x12412, None, "CUNEIFORM NUMERIC SIGN SEVEN U", 0x31, "Cuneiform_Numbers"),
    c(0x12413, None, "CUNEIFORM NUMERIC SIGN EIGHT U", 0x31, "Cuneiform_Numbers"),
    c(0x12414, None, "CUNEIFORM NUMERIC SIGN NINE U", 0x31, "Cuneiform_Numbers"),
    c(0x12415, None, "CUNEIFORM NUMERIC SIGN ONE GESH2", 0x31, "Cuneiform_Numbers"),
    c(0x12416, None, "CUNEIFORM NUMERIC SIGN TWO GESH2", 0x31, "Cuneiform_Numbers"),
    c(0x12417, None, "CUNEIFORM NUMERIC SIGN THREE GESH2", 0x31, "Cuneiform_Numbers"),
    c(0x12418, None, "CUNEIFORM NUMERIC SIGN FOUR GESH2", 0x31, "Cuneiform_Numbers"),
    c(0x12419, None, "CUNEIFORM NUMERIC SIGN FIVE GESH2", 0x31, "Cuneiform_Numbers"),
    c(0x1241A, None, "CUNEIFORM NUMERIC SIGN SIX GESH2", 0x31, "Cuneiform_Numbers"),
    c(0x1241B, None, "CUNEIFORM NUMERIC SIGN SEVEN GESH2", 0x31, "Cuneiform_Numbers"),
    c(0x1241C, None, "CUNEIFORM NUMERIC SIGN EIGHT GESH2", 0x31, "Cuneiform_Numbers"),
    c(0x1241D, None, "CUNEIFORM NUMERIC SIGN NINE GESH2", 0x31, "Cuneiform_Numbers"),
    c(0x1241E, None, "CUNEIFORM NUMERIC SIGN ONE GESHU", 0x31, "Cuneiform_Numbers"),
    c(0x1241F, None, "CUNEIFORM NUMERIC SIGN TWO GESHU", 0x31, "Cuneiform_Numbers"),
    c(0x12420, None, "CUNEIFORM NUMERIC SIGN THREE GESHU", 0x31, "Cuneiform_Numbers"),
    c(0x12421, None, "CUNEIFORM NUMERIC SIGN FOUR GESHU", 0x31, "Cuneiform_Numbers"),
    c(0x12422, None, "CUNEIFORM NUMERIC SIGN FIVE GESHU", 0x31, "Cuneiform_Numbers"),
    c(0x12423, None, "CUNEIFORM NUMERIC SIGN TWO SHAR2", 0x31, "Cuneiform_Numbers"),
    c(0x12424, None, "CUNEIFORM NUMERIC SIGN THREE SHAR2", 0x31, "Cuneiform_Numbers"),
    c(0x12425, None, "CUNEIFORM NUMERIC SIGN THREE SHAR2 VARIANT FORM", 0x31, "Cuneiform_Numbers"),
    c(0x12426, None, "CUNEIFORM NUMERIC SIGN FOUR SHAR2", 0x31, "Cuneiform_Numbers"),
    c(0x12427, None, "CUNEIFORM NUMERIC SIGN FIVE SHAR2", 0x31, "Cuneiform_Numbers"),
    c(0x12428, None, "CUNEIFORM NUMERIC SIGN SIX SHAR2", 0x31, "Cuneiform_Numbers"),
    c(0x12429, None, "CUNEIFORM NUMERIC SIGN SEVEN SHAR2", 0x31, "Cuneiform_Numbers"),
    c(0x1242A, None, "CUNEIFORM NUMERIC SIGN EIGHT SHAR2", 0x31, "Cuneiform_Numbers"),
    c(0x1242B, None, "CUNEIFORM NUMERIC SIGN NINE SHAR2", 0x31, "Cuneiform_Numbers"),
    c(0x1242C, None, "CUNEIFORM NUMERIC SIGN ONE SHARU", 0x31, "Cuneiform_Numbers"),
    c(0x1242D, None, "CUNEIFORM NUMERIC SIGN TWO SHARU", 0x31, "Cuneiform_Numbers"),
    c(0x1242E, None, "CUNEIFORM NUMERIC SIGN THREE SHARU", 0x31, "Cuneiform_Numbers"),
    c(0x1242F, None, "CUNEIFORM NUMERIC SIGN THREE SHARU VARIANT FORM", 0x31, "Cuneiform_Numbers"),
    c(0x12430, None, "CUNEIFORM NUMERIC SIGN FOUR SHARU", 0x31, "Cuneiform_Numbers"),
    c(0x12431, None, "CUNEIFORM NUMERIC SIGN FIVE SHARU", 0x31, "Cuneiform_Numbers"),
    c(0x12432, None, "CUNEIFORM NUMERIC SIGN SHAR2 TIMES GAL PLUS DISH", 0x31, "Cuneiform_Numbers"),
    c(0x12433, None, "CUNEIFORM NUMERIC SIGN SHAR2 TIMES GAL PLUS MIN", 0x31, "Cuneiform_Numbers"),
    c(0x12434, None, "CUNEIFORM NUMERIC SIGN ONE BURU", 0x31, "Cuneiform_Numbers"),
    c(0x12435, None, "CUNEIFORM NUMERIC SIGN TWO BURU", 0x31, "Cuneiform_Numbers"),
    c(0x12436, None, "CUNEIFORM NUMERIC SIGN THREE BURU", 0x31, "Cuneiform_Numbers"),
    c(0x12437, None, "CUNEIFORM NUMERIC SIGN THREE BURU VARIANT FORM", 0x31, "Cuneiform_Numbers"),
    c(0x12438, None, "CUNEIFORM NUMERIC SIGN FOUR BURU", 0x31, "Cuneiform_Numbers"),
    c(0x12439, None, "CUNEIFORM NUMERIC SIGN FIVE BURU", 0x31, "Cuneiform_Numbers"),
    c(0x1243A, None, "CUNEIFORM NUMERIC SIGN THREE VARIANT FORM ESH16", 0x31, "Cuneiform_Numbers"),
    c(0x1243B, None, "CUNEIFORM NUMERIC SIGN THREE VARIANT FORM ESH21", 0x31, "Cuneiform_Numbers"),
    c(0x1243C, None, "CUNEIFORM NUMERIC SIGN FOUR VARIANT FORM LIMMU", 0x31, "Cuneiform_Numbers"),
    c(0x1243D, None, "CUNEIFORM NUMERIC SIGN FOUR VARIANT FORM LIMMU4", 0x31, "Cuneiform_Numbers"),
    c(0x1243E, None, "CUNEIFORM NUMERIC SIGN FOUR VARIANT FORM LIMMU A", 0x31, "Cuneiform_Numbers"),
    c(0x1243F, None, "CUNEIFORM NUMERIC SIGN FOUR VARIANT FORM LIMMU B", 0x31, "Cuneiform_Numbers"),
    c(0x12440, None, "CUNEIFORM NUMERIC SIGN SIX VARIANT FORM ASH9", 0x31, "Cuneiform_Numbers"),
    c(0x12441, None, "CUNEIFORM NUMERIC SIGN SEVEN VARIANT FORM IMIN3", 0x31, "Cuneiform_Numbers"),
    c(0x12442, None, "CUNEIFORM NUMERIC SIGN SEVEN VARIANT FORM IMIN A", 0x31, "Cuneiform_Numbers"),
    c(0x12443, None, "CUNEIFORM NUMERIC SIGN SEVEN VARIANT FORM IMIN B", 0x31, "Cuneiform_Numbers"),
    c(0x12444, None, "CUNEIFORM NUMERIC SIGN EIGHT VARIANT FORM USSU", 0x31, "Cuneiform_Numbers"),
    c(0x12445, None, "CUNEIFORM NUMERIC SIGN EIGHT VARIANT FORM USSU3", 0x31, "Cuneiform_Numbers"),
    c(0x12446, None, "CUNEIFORM NUMERIC SIGN NINE VARIANT FORM ILIMMU", 0x31, "Cuneiform_Numbers"),
    c(0x12447, None, "CUNEIFORM NUMERIC SIGN NINE VARIANT FORM ILIMMU3", 0x31, "Cuneiform_Numbers"),
    c(0x12448, None, "CUNEIFORM NUMERIC SIGN NINE VARIANT FORM ILIMMU4", 0x31, "Cuneiform_Numbers"),
    c(0x12449, None, "CUNEIFORM NUMERIC SIGN NINE VARIANT FORM ILIMMU A", 0x31, "Cuneiform_Numbers"),
    c(0x1244A, None, "CUNEIFORM NUMERIC SIGN TWO ASH TENU", 0x31, "Cuneiform_Numbers"),
    c(0x1244B, None, "CUNEIFORM NUMERIC SIGN THREE ASH TENU", 0x31, "Cuneiform_Numbers"),
    c(0x1244C, None, "CUNEIFORM NUMERIC SIGN FOUR ASH TENU", 0x31, "Cuneiform_Numbers"),
    c(0x1244D, None, "CUNEIFORM NUMERIC SIGN FIVE ASH TENU", 0x31, "Cuneiform_Numbers"),
    c(0x1244E, None, "CUNEIFORM NUMERIC SIGN SIX ASH TENU", 0x31, "Cuneiform_Numbers"),
    c(0x1244F, None, "CUNEIFORM NUMERIC SIGN ONE BAN2", 0x31, "Cuneiform_Numbers"),
    c(0x12450, None, "CUNEIFORM NUMERIC SIGN TWO BAN2", 0x31, "Cuneiform_Numbers"),
    c(0x12451, None, "CUNEIFORM NUMERIC SIGN THREE BAN2", 0x31, "Cuneiform_Numbers"),
    c(0x12452, None, "CUNEIFORM NUMERIC SIGN FOUR BAN2", 0x31, "Cuneiform_Numbers"),
    c(0x12453, None, "CUNEIFORM NUMERIC SIGN FOUR BAN2 VARIANT FORM", 0x31, "Cuneiform_Numbers"),
    c(0x12454, None, "CUNEIFORM NUMERIC SIGN FIVE BAN2", 0x31, "Cuneiform_Numbers"),
    c(0x12455, None, "CUNEIFORM NUMERIC SIGN FIVE BAN2 VARIANT FORM", 0x31, "Cuneiform_Numbers"),
    c(0x12456, None, "CUNEIFORM NUMERIC SIGN NIGIDAMIN", 0x31, "Cuneiform_Numbers"),
    c(0x12457, None, "CUNEIFORM NUMERIC SIGN NIGIDAESH", 0x31, "Cuneiform_Numbers"),
    c(0x12458, None, "CUNEIFORM NUMERIC SIGN ONE ESHE3", 0x31, "Cuneiform_Numbers"),
    c(0x12459, None, "CUNEIFORM NUMERIC SIGN TWO ESHE3", 0x31, "Cuneiform_Numbers"),
    c(0x1245A, None, "CUNEIFORM NUMERIC SIGN ONE THIRD DISH", 0x31, "Cuneiform_Numbers"),
    c(0x1245B, None, "CUNEIFORM NUMERIC SIGN TWO THIRDS DISH", 0x31, "Cuneiform_Numbers"),
    c(0x1245C, None, "CUNEIFORM NUMERIC SIGN FIVE SIXTHS DISH", 0x31, "Cuneiform_Numbers"),
    c(0x1245D, None, "CUNEIFORM NUMERIC SIGN ONE THIRD VARIANT FORM A", 0x31, "Cuneiform_Numbers"),
    c(0x1245E, None, "CUNEIFORM NUMERIC SIGN TWO THIRDS VARIANT FORM A", 0x31, "Cuneiform_Numbers"),
    c(0x1245F, None, "CUNEIFORM NUMERIC SIGN ONE EIGHTH ASH", 0x31, "Cuneiform_Numbers"),
    c(0x12460, None, "CUNEIFORM NUMERIC SIGN ONE QUARTER ASH", 0x31, "Cuneiform_Numbers"),
    c(0x12461, None, "CUNEIFORM NUMERIC SIGN OLD ASSYRIAN ONE SIXTH", 0x31, "Cuneiform_Numbers"),
    c(0x12462, None, "CUNEIFORM NUMERIC SIGN OLD ASSYRIAN ONE QUARTER", 0x31, "Cuneiform_Numbers"),
    c(0x12463, None, "CUNEIFORM NUMERIC SIGN ONE QUARTER GUR", 0x31, "Cuneiform_Numbers"),
    c(0x12464, None, "CUNEIFORM NUMERIC SIGN ONE HALF GUR", 0x31, "Cuneiform_Numbers"),
    c(0x12465, None, "CUNEIFORM NUMERIC SIGN ELAMITE ONE THIRD", 0x31, "Cuneiform_Numbers"),
    c(0x12466, None, "CUNEIFORM NUMERIC SIGN ELAMITE TWO THIRDS", 0x31, "Cuneiform_Numbers"),
    c(0x12467, None, "CUNEIFORM NUMERIC SIGN ELAMITE FORTY", 0x31, "Cuneiform_Numbers"),
    c(0x12468, None, "CUNEIFORM NUMERIC SIGN ELAMITE FIFTY", 0x31, "Cuneiform_Numbers"),
    c(0x12469, None, "CUNEIFORM NUMERIC SIGN FOUR U VARIANT FORM", 0x31, "Cuneiform_Numbers"),
    c(0x1246A, None, "CUNEIFORM NUMERIC SIGN FIVE U VARIANT FORM", 0x31, "Cuneiform_Numbers"),
    c(0x1246B, None, "CUNEIFORM NUMERIC SIGN SIX U VARIANT FORM", 0x31, "Cuneiform_Numbers"),
    c(0x1246C, None, "CUNEIFORM NUMERIC SIGN SEVEN U VARIANT FORM", 0x31, "Cuneiform_Numbers"),
    c(0x1246D, None, "CUNEIFORM NUMERIC SIGN EIGHT U VARIANT FORM", 0x31, "Cuneiform_Numbers"),
    c(0x1246E, None, "CUNEIFORM NUMERIC SIGN NINE U VARIANT FORM", 0x31, "Cuneiform_Numbers"),
    c(0x12470, None, "CUNEIFORM PUNCTUATION SIGN OLD ASSYRIAN WORD DIVIDER", 0x00, "Cuneiform_Numbers"),
    c(0x12471, None, "CUNEIFORM PUNCTUATION SIGN VERTICAL COLON", 0x00, "Cuneiform_Numbers"),
    c(0x12472, None, "CUNEIFORM PUNCTUATION SIGN DIAGONAL COLON", 0x00, "Cuneiform_Numbers"),
    c(0x12473, None, "CUNEIFORM PUNCTUATION SIGN DIAGONAL TRICOLON", 0x00, "Cuneiform_Numbers"),
    c(0x12474, None, "CUNEIFORM PUNCTUATION SIGN DIAGONAL QUADCOLON", 0x00, "Cuneiform_Numbers"),
    c(0x12480, None, "CUNEIFORM SIGN AB TIMES NUN TENU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12481, None, "CUNEIFORM SIGN AB TIMES SHU2", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12482, None, "CUNEIFORM SIGN AD TIMES ESH2", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12483, None, "CUNEIFORM SIGN BAD TIMES DISH TENU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12484, None, "CUNEIFORM SIGN BAHAR2 TIMES AB2", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12485, None, "CUNEIFORM SIGN BAHAR2 TIMES NI", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12486, None, "CUNEIFORM SIGN BAHAR2 TIMES ZA", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12487, None, "CUNEIFORM SIGN BU OVER BU TIMES NA2", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12488, None, "CUNEIFORM SIGN DA TIMES TAK4", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12489, None, "CUNEIFORM SIGN DAG TIMES KUR", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1248A, None, "CUNEIFORM SIGN DIM TIMES IGI", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1248B, None, "CUNEIFORM SIGN DIM TIMES U U U", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1248C, None, "CUNEIFORM SIGN DIM2 TIMES UD", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1248D, None, "CUNEIFORM SIGN DUG TIMES ANSHE", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1248E, None, "CUNEIFORM SIGN DUG TIMES ASH", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1248F, None, "CUNEIFORM SIGN DUG TIMES ASH AT LEFT", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12490, None, "CUNEIFORM SIGN DUG TIMES DIN", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12491, None, "CUNEIFORM SIGN DUG TIMES DUN", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12492, None, "CUNEIFORM SIGN DUG TIMES ERIN2", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12493, None, "CUNEIFORM SIGN DUG TIMES GA", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12494, None, "CUNEIFORM SIGN DUG TIMES GI", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12495, None, "CUNEIFORM SIGN DUG TIMES GIR2 GUNU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12496, None, "CUNEIFORM SIGN DUG TIMES GISH", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12497, None, "CUNEIFORM SIGN DUG TIMES HA", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12498, None, "CUNEIFORM SIGN DUG TIMES HI", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12499, None, "CUNEIFORM SIGN DUG TIMES IGI GUNU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1249A, None, "CUNEIFORM SIGN DUG TIMES KASKAL", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1249B, None, "CUNEIFORM SIGN DUG TIMES KUR", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1249C, None, "CUNEIFORM SIGN DUG TIMES KUSHU2", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1249D, None, "CUNEIFORM SIGN DUG TIMES KUSHU2 PLUS KASKAL", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1249E, None, "CUNEIFORM SIGN DUG TIMES LAK-020", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1249F, None, "CUNEIFORM SIGN DUG TIMES LAM", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124A0, None, "CUNEIFORM SIGN DUG TIMES LAM TIMES KUR", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124A1, None, "CUNEIFORM SIGN DUG TIMES LUH PLUS GISH", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124A2, None, "CUNEIFORM SIGN DUG TIMES MASH", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124A3, None, "CUNEIFORM SIGN DUG TIMES MES", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124A4, None, "CUNEIFORM SIGN DUG TIMES MI", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124A5, None, "CUNEIFORM SIGN DUG TIMES NI", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124A6, None, "CUNEIFORM SIGN DUG TIMES PI", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124A7, None, "CUNEIFORM SIGN DUG TIMES SHE", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124A8, None, "CUNEIFORM SIGN DUG TIMES SI GUNU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124A9, None, "CUNEIFORM SIGN E2 TIMES KUR", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124AA, None, "CUNEIFORM SIGN E2 TIMES PAP", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124AB, None, "CUNEIFORM SIGN ERIN2 X", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124AC, None, "CUNEIFORM SIGN ESH2 CROSSING ESH2", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124AD, None, "CUNEIFORM SIGN EZEN SHESHIG TIMES ASH", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124AE, None, "CUNEIFORM SIGN EZEN SHESHIG TIMES HI", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124AF, None, "CUNEIFORM SIGN EZEN SHESHIG TIMES IGI GUNU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124B0, None, "CUNEIFORM SIGN EZEN SHESHIG TIMES LA", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124B1, None, "CUNEIFORM SIGN EZEN SHESHIG TIMES LAL", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124B2, None, "CUNEIFORM SIGN EZEN SHESHIG TIMES ME", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124B3, None, "CUNEIFORM SIGN EZEN SHESHIG TIMES MES", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124B4, None, "CUNEIFORM SIGN EZEN SHESHIG TIMES SU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124B5, None, "CUNEIFORM SIGN EZEN TIMES SU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124B6, None, "CUNEIFORM SIGN GA2 TIMES BAHAR2", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124B7, None, "CUNEIFORM SIGN GA2 TIMES DIM GUNU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124B8, None, "CUNEIFORM SIGN GA2 TIMES DUG TIMES IGI GUNU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124B9, None, "CUNEIFORM SIGN GA2 TIMES DUG TIMES KASKAL", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124BA, None, "CUNEIFORM SIGN GA2 TIMES EREN", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124BB, None, "CUNEIFORM SIGN GA2 TIMES GA", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124BC, None, "CUNEIFORM SIGN GA2 TIMES GAR PLUS DI", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124BD, None, "CUNEIFORM SIGN GA2 TIMES GAR PLUS NE", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124BE, None, "CUNEIFORM SIGN GA2 TIMES HA PLUS A", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124BF, None, "CUNEIFORM SIGN GA2 TIMES KUSHU2 PLUS KASKAL", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124C0, None, "CUNEIFORM SIGN GA2 TIMES LAM", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124C1, None, "CUNEIFORM SIGN GA2 TIMES LAM TIMES KUR", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124C2, None, "CUNEIFORM SIGN GA2 TIMES LUH", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124C3, None, "CUNEIFORM SIGN GA2 TIMES MUSH", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124C4, None, "CUNEIFORM SIGN GA2 TIMES NE", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124C5, None, "CUNEIFORM SIGN GA2 TIMES NE PLUS E2", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124C6, None, "CUNEIFORM SIGN GA2 TIMES NE PLUS GI", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124C7, None, "CUNEIFORM SIGN GA2 TIMES SHIM", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124C8, None, "CUNEIFORM SIGN GA2 TIMES ZIZ2", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124C9, None, "CUNEIFORM SIGN GABA ROTATED NINETY DEGREES", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124CA, None, "CUNEIFORM SIGN GESHTIN TIMES U", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124CB, None, "CUNEIFORM SIGN GISH TIMES GISH CROSSING GISH", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124CC, None, "CUNEIFORM SIGN GU2 TIMES IGI GUNU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124CD, None, "CUNEIFORM SIGN GUD PLUS GISH TIMES TAK4", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124CE, None, "CUNEIFORM SIGN HA TENU GUNU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124CF, None, "CUNEIFORM SIGN HI TIMES ASH OVER HI TIMES ASH", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124D0, None, "CUNEIFORM SIGN KA TIMES BU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124D1, None, "CUNEIFORM SIGN KA TIMES KA", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124D2, None, "CUNEIFORM SIGN KA TIMES U U U", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124D3, None, "CUNEIFORM SIGN KA TIMES UR", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124D4, None, "CUNEIFORM SIGN LAGAB TIMES ZU OVER ZU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124D5, None, "CUNEIFORM SIGN LAK-003", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124D6, None, "CUNEIFORM SIGN LAK-021", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124D7, None, "CUNEIFORM SIGN LAK-025", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124D8, None, "CUNEIFORM SIGN LAK-030", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124D9, None, "CUNEIFORM SIGN LAK-050", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124DA, None, "CUNEIFORM SIGN LAK-051", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124DB, None, "CUNEIFORM SIGN LAK-062", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124DC, None, "CUNEIFORM SIGN LAK-079 OVER LAK-079 GUNU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124DD, None, "CUNEIFORM SIGN LAK-080", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124DE, None, "CUNEIFORM SIGN LAK-081 OVER LAK-081", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124DF, None, "CUNEIFORM SIGN LAK-092", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124E0, None, "CUNEIFORM SIGN LAK-130", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124E1, None, "CUNEIFORM SIGN LAK-142", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124E2, None, "CUNEIFORM SIGN LAK-210", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124E3, None, "CUNEIFORM SIGN LAK-219", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124E4, None, "CUNEIFORM SIGN LAK-220", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124E5, None, "CUNEIFORM SIGN LAK-225", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124E6, None, "CUNEIFORM SIGN LAK-228", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124E7, None, "CUNEIFORM SIGN LAK-238", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124E8, None, "CUNEIFORM SIGN LAK-265", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124E9, None, "CUNEIFORM SIGN LAK-266", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124EA, None, "CUNEIFORM SIGN LAK-343", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124EB, None, "CUNEIFORM SIGN LAK-347", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124EC, None, "CUNEIFORM SIGN LAK-348", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124ED, None, "CUNEIFORM SIGN LAK-383", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124EE, None, "CUNEIFORM SIGN LAK-384", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124EF, None, "CUNEIFORM SIGN LAK-390", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124F0, None, "CUNEIFORM SIGN LAK-441", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124F1, None, "CUNEIFORM SIGN LAK-449", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124F2, None, "CUNEIFORM SIGN LAK-449 TIMES GU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124F3, None, "CUNEIFORM SIGN LAK-449 TIMES IGI", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124F4, None, "CUNEIFORM SIGN LAK-449 TIMES PAP PLUS LU3", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124F5, None, "CUNEIFORM SIGN LAK-449 TIMES PAP PLUS PAP PLUS LU3", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124F6, None, "CUNEIFORM SIGN LAK-449 TIMES U2 PLUS BA", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124F7, None, "CUNEIFORM SIGN LAK-450", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124F8, None, "CUNEIFORM SIGN LAK-457", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124F9, None, "CUNEIFORM SIGN LAK-470", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124FA, None, "CUNEIFORM SIGN LAK-483", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124FB, None, "CUNEIFORM SIGN LAK-490", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124FC, None, "CUNEIFORM SIGN LAK-492", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124FD, None, "CUNEIFORM SIGN LAK-493", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124FE, None, "CUNEIFORM SIGN LAK-495", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x124FF, None, "CUNEIFORM SIGN LAK-550", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12500, None, "CUNEIFORM SIGN LAK-608", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12501, None, "CUNEIFORM SIGN LAK-617", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12502, None, "CUNEIFORM SIGN LAK-617 TIMES ASH", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12503, None, "CUNEIFORM SIGN LAK-617 TIMES BAD", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12504, None, "CUNEIFORM SIGN LAK-617 TIMES DUN3 GUNU GUNU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12505, None, "CUNEIFORM SIGN LAK-617 TIMES KU3", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12506, None, "CUNEIFORM SIGN LAK-617 TIMES LA", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12507, None, "CUNEIFORM SIGN LAK-617 TIMES TAR", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12508, None, "CUNEIFORM SIGN LAK-617 TIMES TE", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12509, None, "CUNEIFORM SIGN LAK-617 TIMES U2", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1250A, None, "CUNEIFORM SIGN LAK-617 TIMES UD", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1250B, None, "CUNEIFORM SIGN LAK-617 TIMES URUDA", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1250C, None, "CUNEIFORM SIGN LAK-636", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1250D, None, "CUNEIFORM SIGN LAK-648", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1250E, None, "CUNEIFORM SIGN LAK-648 TIMES DUB", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1250F, None, "CUNEIFORM SIGN LAK-648 TIMES GA", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12510, None, "CUNEIFORM SIGN LAK-648 TIMES IGI", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12511, None, "CUNEIFORM SIGN LAK-648 TIMES IGI GUNU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12512, None, "CUNEIFORM SIGN LAK-648 TIMES NI", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12513, None, "CUNEIFORM SIGN LAK-648 TIMES PAP PLUS PAP PLUS LU3", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12514, None, "CUNEIFORM SIGN LAK-648 TIMES SHESH PLUS KI", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12515, None, "CUNEIFORM SIGN LAK-648 TIMES UD", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12516, None, "CUNEIFORM SIGN LAK-648 TIMES URUDA", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12517, None, "CUNEIFORM SIGN LAK-724", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12518, None, "CUNEIFORM SIGN LAK-749", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12519, None, "CUNEIFORM SIGN LU2 GUNU TIMES ASH", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1251A, None, "CUNEIFORM SIGN LU2 TIMES DISH", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1251B, None, "CUNEIFORM SIGN LU2 TIMES HAL", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1251C, None, "CUNEIFORM SIGN LU2 TIMES PAP", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1251D, None, "CUNEIFORM SIGN LU2 TIMES PAP PLUS PAP PLUS LU3", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1251E, None, "CUNEIFORM SIGN LU2 TIMES TAK4", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1251F, None, "CUNEIFORM SIGN MI PLUS ZA7", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12520, None, "CUNEIFORM SIGN MUSH OVER MUSH TIMES GA", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12521, None, "CUNEIFORM SIGN MUSH OVER MUSH TIMES KAK", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12522, None, "CUNEIFORM SIGN NINDA2 TIMES DIM GUNU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12523, None, "CUNEIFORM SIGN NINDA2 TIMES GISH", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12524, None, "CUNEIFORM SIGN NINDA2 TIMES GUL", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12525, None, "CUNEIFORM SIGN NINDA2 TIMES HI", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12526, None, "CUNEIFORM SIGN NINDA2 TIMES KESH2", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12527, None, "CUNEIFORM SIGN NINDA2 TIMES LAK-050", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12528, None, "CUNEIFORM SIGN NINDA2 TIMES MASH", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12529, None, "CUNEIFORM SIGN NINDA2 TIMES PAP PLUS PAP", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1252A, None, "CUNEIFORM SIGN NINDA2 TIMES U", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1252B, None, "CUNEIFORM SIGN NINDA2 TIMES U PLUS U", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1252C, None, "CUNEIFORM SIGN NINDA2 TIMES URUDA", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1252D, None, "CUNEIFORM SIGN SAG GUNU TIMES HA", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1252E, None, "CUNEIFORM SIGN SAG TIMES EN", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1252F, None, "CUNEIFORM SIGN SAG TIMES SHE AT LEFT", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12530, None, "CUNEIFORM SIGN SAG TIMES TAK4", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12531, None, "CUNEIFORM SIGN SHA6 TENU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12532, None, "CUNEIFORM SIGN SHE OVER SHE", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12533, None, "CUNEIFORM SIGN SHE PLUS HUB2", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12534, None, "CUNEIFORM SIGN SHE PLUS NAM2", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12535, None, "CUNEIFORM SIGN SHE PLUS SAR", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12536, None, "CUNEIFORM SIGN SHU2 PLUS DUG TIMES NI", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12537, None, "CUNEIFORM SIGN SHU2 PLUS E2 TIMES AN", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12538, None, "CUNEIFORM SIGN SI TIMES TAK4", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12539, None, "CUNEIFORM SIGN TAK4 PLUS SAG", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1253A, None, "CUNEIFORM SIGN TUM TIMES GAN2 TENU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1253B, None, "CUNEIFORM SIGN TUM TIMES THREE DISH", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1253C, None, "CUNEIFORM SIGN UR2 INVERTED", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1253D, None, "CUNEIFORM SIGN UR2 TIMES UD", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1253E, None, "CUNEIFORM SIGN URU TIMES DARA3", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x1253F, None, "CUNEIFORM SIGN URU TIMES LAK-668", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12540, None, "CUNEIFORM SIGN URU TIMES LU3", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12541, None, "CUNEIFORM SIGN ZA7", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12542, None, "CUNEIFORM SIGN ZU OVER ZU PLUS SAR", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12543, None, "CUNEIFORM SIGN ZU5 TIMES THREE DISH TENU", 0x31, "Early_Dynastic_Cuneiform"),
    c(0x12F90, None, "CYPRO-MINOAN SIGN CM001", 0x31, "Cypro_Minoan"),
    c(0x12F91, None, "CYPRO-MINOAN SIGN CM002", 0x31, "Cypro_Minoan"),
    c(0x12F92, None, "CYPRO-MINOAN SIGN CM004", 0x31, "Cypro_Minoan"),
    c(0x12F93, None, "CYPRO-MINOAN SIGN CM005", 0x31, "Cypro_Minoan"),
    c(0x12F94, None, "CYPRO-MINOAN SIGN CM006", 0x31, "Cypro_Minoan"),
    c(0x12F95, None, "CYPRO-MINOAN SIGN CM007", 0x31, "Cypro_Minoan"),
    c(0x12F96, None, "CYPRO-MINOAN SIGN CM008", 0x31, "Cypro_Minoan"),
    c(0x12F97, None, "CYPRO-MINOAN SIGN CM009", 0x31, "Cypro_Minoan"),
    c(0x12F98, None, "CYPRO-MINOAN SIGN CM010", 0x31, "Cypro_Minoan"),
    c(0x12F99, None, "CYPRO-MINOAN SIGN CM011", 0x31, "Cypro_Minoan"),
    c(0x12F9A, None, "CYPRO-MINOAN SIGN CM012", 0x31, "Cypro_Minoan"),
    c(0x12F9B, None, "CYPRO-MINOAN SIGN CM012B", 0x31, "Cypro_Minoan"),
    c(0x12F9C, None, "CYPRO-MINOAN SIGN CM013", 0x31, "Cypro_Minoan"),
    c(0x12F9D, None, "CYPRO-MINOAN SIGN CM015", 0x31, "Cypro_Minoan"),
    c(0x12F9E, None, "CYPRO-MINOAN SIGN CM017", 0x31, "Cypro_Minoan"),
    c(0x12F9F, None, "CYPRO-MINOAN SIGN CM019", 0x31, "Cypro_Minoan"),
    c(0x12FA0, None, "CYPRO-MINOAN SIGN CM021", 0x31, "Cypro_Minoan"),
    c(0x12FA1, None, "CYPRO-MINOAN SIGN CM023", 0x31, "Cypro_Minoan"),
    c(0x12FA2, None, "CYPRO-MINOAN SIGN CM024", 0x31, "Cypro_Minoan"),
    c(0x12FA3, None, "CYPRO-MINOAN SIGN CM025", 0x31, "Cypro_Minoan"),
    c(0x12FA4, None, "CYPRO-MINOAN SIGN CM026", 0x31, "Cypro_Minoan"),
    c(0x12FA5, None, "CYPRO-MINOAN SIGN CM027", 0x31, "Cypro_Minoan"),
    c(0x12FA6, None, "CYPRO-MINOAN SIGN CM028", 0x31, "Cypro_Minoan"),
    c(0x12FA7, None, "CYPRO-MINOAN SIGN CM029", 0x31, "Cypro_Minoan"),
    c(0x12FA8, None, "CYPRO-MINOAN SIGN CM030", 0x31, "Cypro_Minoan"),
    c(0x12FA9, None, "CYPRO-MINOAN SIGN CM033", 0x31, "Cypro_Minoan"),
    c(0x12FAA, None, "CYPRO-MINOAN SIGN CM034", 0x31, "Cypro_Minoan"),
    c(0x12FAB, None, "CYPRO-MINOAN SIGN CM035", 0x31, "Cypro_Minoan"),
    c(0x12FAC, None, "CYPRO-MINOAN SIGN CM036", 0x31, "Cypro_Minoan"),
    c(0x12FAD, None, "CYPRO-MINOAN SIGN CM037", 0x31, "Cypro_Minoan"),
    c(0x12FAE, None, "CYPRO-MINOAN SIGN CM038", 0x31, "Cypro_Minoan"),
    c(0x12FAF, None, "CYPRO-MINOAN SIGN CM039", 0x31, "Cypro_Minoan"),
    c(0x12FB0, None, "CYPRO-MINOAN SIGN CM040", 0x31, "Cypro_Minoan"),
    c(0x12FB1, None, "CYPRO-MINOAN SIGN CM041", 0x31, "Cypro_Minoan"),
    c(0x12FB2, None, "CYPRO-MINOAN SIGN CM044", 0x31, "Cypro_Minoan"),
    c(0x12FB3, None, "CYPRO-MINOAN SIGN CM046", 0x31, "Cypro_Minoan"),
    c(0x12FB4, None, "CYPRO-MINOAN SIGN CM047", 0x31, "Cypro_Minoan"),
    c(0x12FB5, None, "CYPRO-MINOAN SIGN CM049", 0x31, "Cypro_Minoan"),
    c(0x12FB6, None, "CYPRO-MINOAN SIGN CM050", 0x31, "Cypro_Minoan"),
    c(0x12FB7, None, "CYPRO-MINOAN SIGN CM051", 0x31, "Cypro_Minoan"),
    c(0x12FB8, None, "CYPRO-MINOAN SIGN CM052", 0x31, "Cypro_Minoan"),
    c(0x12FB9, None, "CYPRO-MINOAN SIGN CM053", 0x31, "Cypro_Minoan"),
    c(0x12FBA, None, "CYPRO-MINOAN SIGN CM054", 0x31, "Cypro_Minoan"),
    c(0x12FBB, None, "CYPRO-MINOAN SIGN CM055", 0x31, "Cypro_Minoan"),
    c(0x12FBC, None, "CYPRO-MINOAN SIGN CM056", 0x31, "Cypro_Minoan"),
    c(0x12FBD, None, "CYPRO-MINOAN SIGN CM058", 0x31, "Cypro_Minoan"),
    c(0x12FBE, None, "CYPRO-MINOAN SIGN CM059", 0x31, "Cypro_Minoan"),
    c(0x12FBF, None, "CYPRO-MINOAN SIGN CM060", 0x31, "Cypro_Minoan"),
    c(0x12FC0, None, "CYPRO-MINOAN SIGN CM061", 0x31, "Cypro_Minoan"),
    c(0x12FC1, None, "CYPRO-MINOAN SIGN CM062", 0x31, "Cypro_Minoan"),
    c(0x12FC2, None, "CYPRO-MINOAN SIGN CM063", 0x31, "Cypro_Minoan"),
    c(0x12FC3, None, "CYPRO-MINOAN SIGN CM064", 0x31, "Cypro_Minoan"),
    c(0x12FC4, None, "CYPRO-MINOAN SIGN CM066", 0x31, "Cypro_Minoan"),
    c(0x12FC5, None, "CYPRO-MINOAN SIGN CM067", 0x31, "Cypro_Minoan"),
    c(0x12FC6, None, "CYPRO-MINOAN SIGN CM068", 0x31, "Cypro_Minoan"),
    c(0x12FC7, None, "CYPRO-MINOAN SIGN CM069", 0x31, "Cypro_Minoan"),
    c(0x12FC8, None, "CYPRO-MINOAN SIGN CM070", 0x31, "Cypro_Minoan"),
    c(0x12FC9, None, "CYPRO-MINOAN SIGN CM071", 0x31, "Cypro_Minoan"),
    c(0x12FCA, None, "CYPRO-MINOAN SIGN CM072", 0x31, "Cypro_Minoan"),
    c(0x12FCB, None, "CYPRO-MINOAN SIGN CM073", 0x31, "Cypro_Minoan"),
    c(0x12FCC, None, "CYPRO-MINOAN SIGN CM074", 0x31, "Cypro_Minoan"),
    c(0x12FCD, None, "CYPRO-MINOAN SIGN CM075", 0x31, "Cypro_Minoan"),
    c(0x12FCE, None, "CYPRO-MINOAN SIGN CM075B", 0x31, "Cypro_Minoan"),
    c(0x12FCF, None, "CYPRO-MINOAN SIGN CM076", 0x31, "Cypro_Minoan"),
    c(0x12FD0, None, "CYPRO-MINOAN SIGN CM078", 0x31, "Cypro_Minoan"),
    c(0x12FD1, None, "CYPRO-MINOAN SIGN CM079", 0x31, "Cypro_Minoan"),
    c(0x12FD2, None, "CYPRO-MINOAN SIGN CM080", 0x31, "Cypro_Minoan"),
    c(0x12FD3, None, "CYPRO-MINOAN SIGN CM081", 0x31, "Cypro_Minoan"),
    c(0x12FD4, None, "CYPRO-MINOAN SIGN CM082", 0x31, "Cypro_Minoan"),
    c(0x12FD5, None, "CYPRO-MINOAN SIGN CM083", 0x31, "Cypro_Minoan"),
    c(0x12FD6, None, "CYPRO-MINOAN SIGN CM084", 0x31, "Cypro_Minoan"),
    c(0x12FD7, None, "CYPRO-MINOAN SIGN CM085", 0x31, "Cypro_Minoan"),
    c(0x12FD8, None, "CYPRO-MINOAN SIGN CM086", 0x31, "Cypro_Minoan"),
    c(0x12FD9, None, "CYPRO-MINOAN SIGN CM087", 0x31, "Cypro_Minoan"),
    c(0x12FDA, None, "CYPRO-MINOAN SIGN CM088", 0x31, "Cypro_Minoan"),
    c(0x12FDB, None, "CYPRO-MINOAN SIGN CM089", 0x31, "Cypro_Minoan"),
    c(0x12FDC, None, "CYPRO-MINOAN SIGN CM090", 0x31, "Cypro_Minoan"),
    c(0x12FDD, None, "CYPRO-MINOAN SIGN CM091", 0x31, "Cypro_Minoan"),
    c(0x12FDE, None, "CYPRO-MINOAN SIGN CM092", 0x31, "Cypro_Minoan"),
    c(0x12FDF, None, "CYPRO-MINOAN SIGN CM094", 0x31, "Cypro_Minoan"),
    c(0x12FE0, None, "CYPRO-MINOAN SIGN CM095", 0x31, "Cypro_Minoan"),
    c(0x12FE1, None, "CYPRO-MINOAN SIGN CM096", 0x31, "Cypro_Minoan"),
    c(0x12FE2, None, "CYPRO-MINOAN SIGN CM097", 0x31, "Cypro_Minoan"),
    c(0x12FE3, None, "CYPRO-MINOAN SIGN CM098", 0x31, "Cypro_Minoan"),
    c(0x12FE4, None, "CYPRO-MINOAN SIGN CM099", 0x31, "Cypro_Minoan"),
    c(0x12FE5, None, "CYPRO-MINOAN SIGN CM100", 0x31, "Cypro_Minoan"),
    c(0x12FE6, None, "CYPRO-MINOAN SIGN CM101", 0x31, "Cypro_Minoan"),
    c(0x12FE7, None, "CYPRO-MINOAN SIGN CM102", 0x31, "Cypro_Minoan"),
    c(0x12FE8, None, "CYPRO-MINOAN SIGN CM103", 0x31, "Cypro_Minoan"),
    c(0x12FE9, None, "CYPRO-MINOAN SIGN CM104", 0x31, "Cypro_Minoan"),
    c(0x12FEA, None, "CYPRO-MINOAN SIGN CM105", 0x31, "Cypro_Minoan"),
    c(0x12FEB, None, "CYPRO-MINOAN SIGN CM107", 0x31, "Cypro_Minoan"),
    c(0x12FEC, None, "CYPRO-MINOAN SIGN CM108", 0x31, "Cypro_Minoan"),
    c(0x12FED, None, "CYPRO-MINOAN SIGN CM109", 0x31, "Cypro_Minoan"),
    c(0x12FEE, None, "CYPRO-MINOAN SIGN CM110", 0x31, "Cypro_Minoan"),
    c(0x12FEF, None, "CYPRO-MINOAN SIGN CM112", 0x31, "Cypro_Minoan"),
    c(0x12FF0, None, "CYPRO-MINOAN SIGN CM114", 0x31, "Cypro_Minoan"),
    c(0x12FF1, None, "CYPRO-MINOAN SIGN CM301", 0x00, "Cypro_Minoan"),
    c(0x12FF2, None, "CYPRO-MINOAN SIGN CM302", 0x00, "Cypro_Minoan"),
    c(0x13000, None, "EGYPTIAN HIEROGLYPH A001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13001, None, "EGYPTIAN HIEROGLYPH A002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13002, None, "EGYPTIAN HIEROGLYPH A003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13003, None, "EGYPTIAN HIEROGLYPH A004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13004, None, "EGYPTIAN HIEROGLYPH A005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13005, None, "EGYPTIAN HIEROGLYPH A005A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13006, None, "EGYPTIAN HIEROGLYPH A006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13007, None, "EGYPTIAN HIEROGLYPH A006A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13008, None, "EGYPTIAN HIEROGLYPH A006B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13009, None, "EGYPTIAN HIEROGLYPH A007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1300A, None, "EGYPTIAN HIEROGLYPH A008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1300B, None, "EGYPTIAN HIEROGLYPH A009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1300C, None, "EGYPTIAN HIEROGLYPH A010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1300D, None, "EGYPTIAN HIEROGLYPH A011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1300E, None, "EGYPTIAN HIEROGLYPH A012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1300F, None, "EGYPTIAN HIEROGLYPH A013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13010, None, "EGYPTIAN HIEROGLYPH A014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13011, None, "EGYPTIAN HIEROGLYPH A014A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13012, None, "EGYPTIAN HIEROGLYPH A015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13013, None, "EGYPTIAN HIEROGLYPH A016", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13014, None, "EGYPTIAN HIEROGLYPH A017", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13015, None, "EGYPTIAN HIEROGLYPH A017A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13016, None, "EGYPTIAN HIEROGLYPH A018", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13017, None, "EGYPTIAN HIEROGLYPH A019", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13018, None, "EGYPTIAN HIEROGLYPH A020", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13019, None, "EGYPTIAN HIEROGLYPH A021", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1301A, None, "EGYPTIAN HIEROGLYPH A022", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1301B, None, "EGYPTIAN HIEROGLYPH A023", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1301C, None, "EGYPTIAN HIEROGLYPH A024", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1301D, None, "EGYPTIAN HIEROGLYPH A025", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1301E, None, "EGYPTIAN HIEROGLYPH A026", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1301F, None, "EGYPTIAN HIEROGLYPH A027", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13020, None, "EGYPTIAN HIEROGLYPH A028", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13021, None, "EGYPTIAN HIEROGLYPH A029", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13022, None, "EGYPTIAN HIEROGLYPH A030", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13023, None, "EGYPTIAN HIEROGLYPH A031", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13024, None, "EGYPTIAN HIEROGLYPH A032", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13025, None, "EGYPTIAN HIEROGLYPH A032A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13026, None, "EGYPTIAN HIEROGLYPH A033", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13027, None, "EGYPTIAN HIEROGLYPH A034", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13028, None, "EGYPTIAN HIEROGLYPH A035", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13029, None, "EGYPTIAN HIEROGLYPH A036", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1302A, None, "EGYPTIAN HIEROGLYPH A037", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1302B, None, "EGYPTIAN HIEROGLYPH A038", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1302C, None, "EGYPTIAN HIEROGLYPH A039", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1302D, None, "EGYPTIAN HIEROGLYPH A040", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1302E, None, "EGYPTIAN HIEROGLYPH A040A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1302F, None, "EGYPTIAN HIEROGLYPH A041", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13030, None, "EGYPTIAN HIEROGLYPH A042", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13031, None, "EGYPTIAN HIEROGLYPH A042A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13032, None, "EGYPTIAN HIEROGLYPH A043", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13033, None, "EGYPTIAN HIEROGLYPH A043A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13034, None, "EGYPTIAN HIEROGLYPH A044", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13035, None, "EGYPTIAN HIEROGLYPH A045", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13036, None, "EGYPTIAN HIEROGLYPH A045A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13037, None, "EGYPTIAN HIEROGLYPH A046", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13038, None, "EGYPTIAN HIEROGLYPH A047", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13039, None, "EGYPTIAN HIEROGLYPH A048", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1303A, None, "EGYPTIAN HIEROGLYPH A049", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1303B, None, "EGYPTIAN HIEROGLYPH A050", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1303C, None, "EGYPTIAN HIEROGLYPH A051", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1303D, None, "EGYPTIAN HIEROGLYPH A052", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1303E, None, "EGYPTIAN HIEROGLYPH A053", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1303F, None, "EGYPTIAN HIEROGLYPH A054", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13040, None, "EGYPTIAN HIEROGLYPH A055", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13041, None, "EGYPTIAN HIEROGLYPH A056", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13042, None, "EGYPTIAN HIEROGLYPH A057", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13043, None, "EGYPTIAN HIEROGLYPH A058", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13044, None, "EGYPTIAN HIEROGLYPH A059", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13045, None, "EGYPTIAN HIEROGLYPH A060", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13046, None, "EGYPTIAN HIEROGLYPH A061", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13047, None, "EGYPTIAN HIEROGLYPH A062", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13048, None, "EGYPTIAN HIEROGLYPH A063", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13049, None, "EGYPTIAN HIEROGLYPH A064", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1304A, None, "EGYPTIAN HIEROGLYPH A065", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1304B, None, "EGYPTIAN HIEROGLYPH A066", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1304C, None, "EGYPTIAN HIEROGLYPH A067", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1304D, None, "EGYPTIAN HIEROGLYPH A068", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1304E, None, "EGYPTIAN HIEROGLYPH A069", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1304F, None, "EGYPTIAN HIEROGLYPH A070", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13050, None, "EGYPTIAN HIEROGLYPH B001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13051, None, "EGYPTIAN HIEROGLYPH B002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13052, None, "EGYPTIAN HIEROGLYPH B003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13053, None, "EGYPTIAN HIEROGLYPH B004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13054, None, "EGYPTIAN HIEROGLYPH B005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13055, None, "EGYPTIAN HIEROGLYPH B005A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13056, None, "EGYPTIAN HIEROGLYPH B006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13057, None, "EGYPTIAN HIEROGLYPH B007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13058, None, "EGYPTIAN HIEROGLYPH B008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13059, None, "EGYPTIAN HIEROGLYPH B009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1305A, None, "EGYPTIAN HIEROGLYPH C001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1305B, None, "EGYPTIAN HIEROGLYPH C002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1305C, None, "EGYPTIAN HIEROGLYPH C002A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1305D, None, "EGYPTIAN HIEROGLYPH C002B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1305E, None, "EGYPTIAN HIEROGLYPH C002C", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1305F, None, "EGYPTIAN HIEROGLYPH C003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13060, None, "EGYPTIAN HIEROGLYPH C004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13061, None, "EGYPTIAN HIEROGLYPH C005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13062, None, "EGYPTIAN HIEROGLYPH C006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13063, None, "EGYPTIAN HIEROGLYPH C007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13064, None, "EGYPTIAN HIEROGLYPH C008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13065, None, "EGYPTIAN HIEROGLYPH C009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13066, None, "EGYPTIAN HIEROGLYPH C010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13067, None, "EGYPTIAN HIEROGLYPH C010A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13068, None, "EGYPTIAN HIEROGLYPH C011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13069, None, "EGYPTIAN HIEROGLYPH C012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1306A, None, "EGYPTIAN HIEROGLYPH C013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1306B, None, "EGYPTIAN HIEROGLYPH C014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1306C, None, "EGYPTIAN HIEROGLYPH C015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1306D, None, "EGYPTIAN HIEROGLYPH C016", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1306E, None, "EGYPTIAN HIEROGLYPH C017", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1306F, None, "EGYPTIAN HIEROGLYPH C018", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13070, None, "EGYPTIAN HIEROGLYPH C019", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13071, None, "EGYPTIAN HIEROGLYPH C020", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13072, None, "EGYPTIAN HIEROGLYPH C021", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13073, None, "EGYPTIAN HIEROGLYPH C022", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13074, None, "EGYPTIAN HIEROGLYPH C023", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13075, None, "EGYPTIAN HIEROGLYPH C024", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13076, None, "EGYPTIAN HIEROGLYPH D001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13077, None, "EGYPTIAN HIEROGLYPH D002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13078, None, "EGYPTIAN HIEROGLYPH D003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13079, None, "EGYPTIAN HIEROGLYPH D004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1307A, None, "EGYPTIAN HIEROGLYPH D005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1307B, None, "EGYPTIAN HIEROGLYPH D006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1307C, None, "EGYPTIAN HIEROGLYPH D007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1307D, None, "EGYPTIAN HIEROGLYPH D008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1307E, None, "EGYPTIAN HIEROGLYPH D008A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1307F, None, "EGYPTIAN HIEROGLYPH D009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13080, None, "EGYPTIAN HIEROGLYPH D010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13081, None, "EGYPTIAN HIEROGLYPH D011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13082, None, "EGYPTIAN HIEROGLYPH D012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13083, None, "EGYPTIAN HIEROGLYPH D013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13084, None, "EGYPTIAN HIEROGLYPH D014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13085, None, "EGYPTIAN HIEROGLYPH D015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13086, None, "EGYPTIAN HIEROGLYPH D016", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13087, None, "EGYPTIAN HIEROGLYPH D017", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13088, None, "EGYPTIAN HIEROGLYPH D018", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13089, None, "EGYPTIAN HIEROGLYPH D019", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1308A, None, "EGYPTIAN HIEROGLYPH D020", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1308B, None, "EGYPTIAN HIEROGLYPH D021", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1308C, None, "EGYPTIAN HIEROGLYPH D022", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1308D, None, "EGYPTIAN HIEROGLYPH D023", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1308E, None, "EGYPTIAN HIEROGLYPH D024", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1308F, None, "EGYPTIAN HIEROGLYPH D025", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13090, None, "EGYPTIAN HIEROGLYPH D026", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13091, None, "EGYPTIAN HIEROGLYPH D027", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13092, None, "EGYPTIAN HIEROGLYPH D027A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13093, None, "EGYPTIAN HIEROGLYPH D028", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13094, None, "EGYPTIAN HIEROGLYPH D029", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13095, None, "EGYPTIAN HIEROGLYPH D030", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13096, None, "EGYPTIAN HIEROGLYPH D031", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13097, None, "EGYPTIAN HIEROGLYPH D031A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13098, None, "EGYPTIAN HIEROGLYPH D032", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13099, None, "EGYPTIAN HIEROGLYPH D033", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1309A, None, "EGYPTIAN HIEROGLYPH D034", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1309B, None, "EGYPTIAN HIEROGLYPH D034A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1309C, None, "EGYPTIAN HIEROGLYPH D035", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1309D, None, "EGYPTIAN HIEROGLYPH D036", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1309E, None, "EGYPTIAN HIEROGLYPH D037", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1309F, None, "EGYPTIAN HIEROGLYPH D038", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130A0, None, "EGYPTIAN HIEROGLYPH D039", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130A1, None, "EGYPTIAN HIEROGLYPH D040", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130A2, None, "EGYPTIAN HIEROGLYPH D041", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130A3, None, "EGYPTIAN HIEROGLYPH D042", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130A4, None, "EGYPTIAN HIEROGLYPH D043", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130A5, None, "EGYPTIAN HIEROGLYPH D044", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130A6, None, "EGYPTIAN HIEROGLYPH D045", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130A7, None, "EGYPTIAN HIEROGLYPH D046", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130A8, None, "EGYPTIAN HIEROGLYPH D046A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130A9, None, "EGYPTIAN HIEROGLYPH D047", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130AA, None, "EGYPTIAN HIEROGLYPH D048", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130AB, None, "EGYPTIAN HIEROGLYPH D048A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130AC, None, "EGYPTIAN HIEROGLYPH D049", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130AD, None, "EGYPTIAN HIEROGLYPH D050", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130AE, None, "EGYPTIAN HIEROGLYPH D050A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130AF, None, "EGYPTIAN HIEROGLYPH D050B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130B0, None, "EGYPTIAN HIEROGLYPH D050C", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130B1, None, "EGYPTIAN HIEROGLYPH D050D", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130B2, None, "EGYPTIAN HIEROGLYPH D050E", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130B3, None, "EGYPTIAN HIEROGLYPH D050F", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130B4, None, "EGYPTIAN HIEROGLYPH D050G", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130B5, None, "EGYPTIAN HIEROGLYPH D050H", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130B6, None, "EGYPTIAN HIEROGLYPH D050I", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130B7, None, "EGYPTIAN HIEROGLYPH D051", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130B8, None, "EGYPTIAN HIEROGLYPH D052", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130B9, None, "EGYPTIAN HIEROGLYPH D052A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130BA, None, "EGYPTIAN HIEROGLYPH D053", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130BB, None, "EGYPTIAN HIEROGLYPH D054", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130BC, None, "EGYPTIAN HIEROGLYPH D054A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130BD, None, "EGYPTIAN HIEROGLYPH D055", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130BE, None, "EGYPTIAN HIEROGLYPH D056", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130BF, None, "EGYPTIAN HIEROGLYPH D057", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130C0, None, "EGYPTIAN HIEROGLYPH D058", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130C1, None, "EGYPTIAN HIEROGLYPH D059", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130C2, None, "EGYPTIAN HIEROGLYPH D060", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130C3, None, "EGYPTIAN HIEROGLYPH D061", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130C4, None, "EGYPTIAN HIEROGLYPH D062", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130C5, None, "EGYPTIAN HIEROGLYPH D063", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130C6, None, "EGYPTIAN HIEROGLYPH D064", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130C7, None, "EGYPTIAN HIEROGLYPH D065", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130C8, None, "EGYPTIAN HIEROGLYPH D066", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130C9, None, "EGYPTIAN HIEROGLYPH D067", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130CA, None, "EGYPTIAN HIEROGLYPH D067A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130CB, None, "EGYPTIAN HIEROGLYPH D067B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130CC, None, "EGYPTIAN HIEROGLYPH D067C", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130CD, None, "EGYPTIAN HIEROGLYPH D067D", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130CE, None, "EGYPTIAN HIEROGLYPH D067E", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130CF, None, "EGYPTIAN HIEROGLYPH D067F", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130D0, None, "EGYPTIAN HIEROGLYPH D067G", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130D1, None, "EGYPTIAN HIEROGLYPH D067H", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130D2, None, "EGYPTIAN HIEROGLYPH E001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130D3, None, "EGYPTIAN HIEROGLYPH E002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130D4, None, "EGYPTIAN HIEROGLYPH E003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130D5, None, "EGYPTIAN HIEROGLYPH E004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130D6, None, "EGYPTIAN HIEROGLYPH E005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130D7, None, "EGYPTIAN HIEROGLYPH E006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130D8, None, "EGYPTIAN HIEROGLYPH E007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130D9, None, "EGYPTIAN HIEROGLYPH E008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130DA, None, "EGYPTIAN HIEROGLYPH E008A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130DB, None, "EGYPTIAN HIEROGLYPH E009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130DC, None, "EGYPTIAN HIEROGLYPH E009A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130DD, None, "EGYPTIAN HIEROGLYPH E010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130DE, None, "EGYPTIAN HIEROGLYPH E011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130DF, None, "EGYPTIAN HIEROGLYPH E012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130E0, None, "EGYPTIAN HIEROGLYPH E013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130E1, None, "EGYPTIAN HIEROGLYPH E014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130E2, None, "EGYPTIAN HIEROGLYPH E015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130E3, None, "EGYPTIAN HIEROGLYPH E016", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130E4, None, "EGYPTIAN HIEROGLYPH E016A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130E5, None, "EGYPTIAN HIEROGLYPH E017", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130E6, None, "EGYPTIAN HIEROGLYPH E017A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130E7, None, "EGYPTIAN HIEROGLYPH E018", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130E8, None, "EGYPTIAN HIEROGLYPH E019", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130E9, None, "EGYPTIAN HIEROGLYPH E020", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130EA, None, "EGYPTIAN HIEROGLYPH E020A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130EB, None, "EGYPTIAN HIEROGLYPH E021", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130EC, None, "EGYPTIAN HIEROGLYPH E022", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130ED, None, "EGYPTIAN HIEROGLYPH E023", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130EE, None, "EGYPTIAN HIEROGLYPH E024", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130EF, None, "EGYPTIAN HIEROGLYPH E025", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130F0, None, "EGYPTIAN HIEROGLYPH E026", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130F1, None, "EGYPTIAN HIEROGLYPH E027", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130F2, None, "EGYPTIAN HIEROGLYPH E028", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130F3, None, "EGYPTIAN HIEROGLYPH E028A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130F4, None, "EGYPTIAN HIEROGLYPH E029", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130F5, None, "EGYPTIAN HIEROGLYPH E030", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130F6, None, "EGYPTIAN HIEROGLYPH E031", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130F7, None, "EGYPTIAN HIEROGLYPH E032", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130F8, None, "EGYPTIAN HIEROGLYPH E033", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130F9, None, "EGYPTIAN HIEROGLYPH E034", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130FA, None, "EGYPTIAN HIEROGLYPH E034A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130FB, None, "EGYPTIAN HIEROGLYPH E036", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130FC, None, "EGYPTIAN HIEROGLYPH E037", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130FD, None, "EGYPTIAN HIEROGLYPH E038", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130FE, None, "EGYPTIAN HIEROGLYPH F001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x130FF, None, "EGYPTIAN HIEROGLYPH F001A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13100, None, "EGYPTIAN HIEROGLYPH F002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13101, None, "EGYPTIAN HIEROGLYPH F003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13102, None, "EGYPTIAN HIEROGLYPH F004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13103, None, "EGYPTIAN HIEROGLYPH F005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13104, None, "EGYPTIAN HIEROGLYPH F006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13105, None, "EGYPTIAN HIEROGLYPH F007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13106, None, "EGYPTIAN HIEROGLYPH F008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13107, None, "EGYPTIAN HIEROGLYPH F009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13108, None, "EGYPTIAN HIEROGLYPH F010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13109, None, "EGYPTIAN HIEROGLYPH F011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1310A, None, "EGYPTIAN HIEROGLYPH F012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1310B, None, "EGYPTIAN HIEROGLYPH F013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1310C, None, "EGYPTIAN HIEROGLYPH F013A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1310D, None, "EGYPTIAN HIEROGLYPH F014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1310E, None, "EGYPTIAN HIEROGLYPH F015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1310F, None, "EGYPTIAN HIEROGLYPH F016", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13110, None, "EGYPTIAN HIEROGLYPH F017", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13111, None, "EGYPTIAN HIEROGLYPH F018", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13112, None, "EGYPTIAN HIEROGLYPH F019", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13113, None, "EGYPTIAN HIEROGLYPH F020", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13114, None, "EGYPTIAN HIEROGLYPH F021", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13115, None, "EGYPTIAN HIEROGLYPH F021A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13116, None, "EGYPTIAN HIEROGLYPH F022", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13117, None, "EGYPTIAN HIEROGLYPH F023", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13118, None, "EGYPTIAN HIEROGLYPH F024", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13119, None, "EGYPTIAN HIEROGLYPH F025", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1311A, None, "EGYPTIAN HIEROGLYPH F026", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1311B, None, "EGYPTIAN HIEROGLYPH F027", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1311C, None, "EGYPTIAN HIEROGLYPH F028", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1311D, None, "EGYPTIAN HIEROGLYPH F029", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1311E, None, "EGYPTIAN HIEROGLYPH F030", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1311F, None, "EGYPTIAN HIEROGLYPH F031", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13120, None, "EGYPTIAN HIEROGLYPH F031A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13121, None, "EGYPTIAN HIEROGLYPH F032", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13122, None, "EGYPTIAN HIEROGLYPH F033", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13123, None, "EGYPTIAN HIEROGLYPH F034", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13124, None, "EGYPTIAN HIEROGLYPH F035", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13125, None, "EGYPTIAN HIEROGLYPH F036", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13126, None, "EGYPTIAN HIEROGLYPH F037", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13127, None, "EGYPTIAN HIEROGLYPH F037A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13128, None, "EGYPTIAN HIEROGLYPH F038", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13129, None, "EGYPTIAN HIEROGLYPH F038A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1312A, None, "EGYPTIAN HIEROGLYPH F039", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1312B, None, "EGYPTIAN HIEROGLYPH F040", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1312C, None, "EGYPTIAN HIEROGLYPH F041", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1312D, None, "EGYPTIAN HIEROGLYPH F042", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1312E, None, "EGYPTIAN HIEROGLYPH F043", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1312F, None, "EGYPTIAN HIEROGLYPH F044", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13130, None, "EGYPTIAN HIEROGLYPH F045", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13131, None, "EGYPTIAN HIEROGLYPH F045A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13132, None, "EGYPTIAN HIEROGLYPH F046", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13133, None, "EGYPTIAN HIEROGLYPH F046A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13134, None, "EGYPTIAN HIEROGLYPH F047", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13135, None, "EGYPTIAN HIEROGLYPH F047A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13136, None, "EGYPTIAN HIEROGLYPH F048", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13137, None, "EGYPTIAN HIEROGLYPH F049", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13138, None, "EGYPTIAN HIEROGLYPH F050", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13139, None, "EGYPTIAN HIEROGLYPH F051", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1313A, None, "EGYPTIAN HIEROGLYPH F051A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1313B, None, "EGYPTIAN HIEROGLYPH F051B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1313C, None, "EGYPTIAN HIEROGLYPH F051C", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1313D, None, "EGYPTIAN HIEROGLYPH F052", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1313E, None, "EGYPTIAN HIEROGLYPH F053", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1313F, None, "EGYPTIAN HIEROGLYPH G001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13140, None, "EGYPTIAN HIEROGLYPH G002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13141, None, "EGYPTIAN HIEROGLYPH G003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13142, None, "EGYPTIAN HIEROGLYPH G004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13143, None, "EGYPTIAN HIEROGLYPH G005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13144, None, "EGYPTIAN HIEROGLYPH G006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13145, None, "EGYPTIAN HIEROGLYPH G006A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13146, None, "EGYPTIAN HIEROGLYPH G007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13147, None, "EGYPTIAN HIEROGLYPH G007A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13148, None, "EGYPTIAN HIEROGLYPH G007B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13149, None, "EGYPTIAN HIEROGLYPH G008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1314A, None, "EGYPTIAN HIEROGLYPH G009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1314B, None, "EGYPTIAN HIEROGLYPH G010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1314C, None, "EGYPTIAN HIEROGLYPH G011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1314D, None, "EGYPTIAN HIEROGLYPH G011A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1314E, None, "EGYPTIAN HIEROGLYPH G012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1314F, None, "EGYPTIAN HIEROGLYPH G013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13150, None, "EGYPTIAN HIEROGLYPH G014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13151, None, "EGYPTIAN HIEROGLYPH G015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13152, None, "EGYPTIAN HIEROGLYPH G016", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13153, None, "EGYPTIAN HIEROGLYPH G017", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13154, None, "EGYPTIAN HIEROGLYPH G018", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13155, None, "EGYPTIAN HIEROGLYPH G019", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13156, None, "EGYPTIAN HIEROGLYPH G020", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13157, None, "EGYPTIAN HIEROGLYPH G020A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13158, None, "EGYPTIAN HIEROGLYPH G021", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13159, None, "EGYPTIAN HIEROGLYPH G022", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1315A, None, "EGYPTIAN HIEROGLYPH G023", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1315B, None, "EGYPTIAN HIEROGLYPH G024", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1315C, None, "EGYPTIAN HIEROGLYPH G025", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1315D, None, "EGYPTIAN HIEROGLYPH G026", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1315E, None, "EGYPTIAN HIEROGLYPH G026A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1315F, None, "EGYPTIAN HIEROGLYPH G027", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13160, None, "EGYPTIAN HIEROGLYPH G028", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13161, None, "EGYPTIAN HIEROGLYPH G029", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13162, None, "EGYPTIAN HIEROGLYPH G030", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13163, None, "EGYPTIAN HIEROGLYPH G031", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13164, None, "EGYPTIAN HIEROGLYPH G032", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13165, None, "EGYPTIAN HIEROGLYPH G033", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13166, None, "EGYPTIAN HIEROGLYPH G034", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13167, None, "EGYPTIAN HIEROGLYPH G035", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13168, None, "EGYPTIAN HIEROGLYPH G036", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13169, None, "EGYPTIAN HIEROGLYPH G036A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1316A, None, "EGYPTIAN HIEROGLYPH G037", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1316B, None, "EGYPTIAN HIEROGLYPH G037A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1316C, None, "EGYPTIAN HIEROGLYPH G038", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1316D, None, "EGYPTIAN HIEROGLYPH G039", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1316E, None, "EGYPTIAN HIEROGLYPH G040", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1316F, None, "EGYPTIAN HIEROGLYPH G041", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13170, None, "EGYPTIAN HIEROGLYPH G042", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13171, None, "EGYPTIAN HIEROGLYPH G043", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13172, None, "EGYPTIAN HIEROGLYPH G043A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13173, None, "EGYPTIAN HIEROGLYPH G044", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13174, None, "EGYPTIAN HIEROGLYPH G045", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13175, None, "EGYPTIAN HIEROGLYPH G045A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13176, None, "EGYPTIAN HIEROGLYPH G046", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13177, None, "EGYPTIAN HIEROGLYPH G047", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13178, None, "EGYPTIAN HIEROGLYPH G048", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13179, None, "EGYPTIAN HIEROGLYPH G049", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1317A, None, "EGYPTIAN HIEROGLYPH G050", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1317B, None, "EGYPTIAN HIEROGLYPH G051", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1317C, None, "EGYPTIAN HIEROGLYPH G052", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1317D, None, "EGYPTIAN HIEROGLYPH G053", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1317E, None, "EGYPTIAN HIEROGLYPH G054", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1317F, None, "EGYPTIAN HIEROGLYPH H001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13180, None, "EGYPTIAN HIEROGLYPH H002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13181, None, "EGYPTIAN HIEROGLYPH H003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13182, None, "EGYPTIAN HIEROGLYPH H004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13183, None, "EGYPTIAN HIEROGLYPH H005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13184, None, "EGYPTIAN HIEROGLYPH H006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13185, None, "EGYPTIAN HIEROGLYPH H006A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13186, None, "EGYPTIAN HIEROGLYPH H007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13187, None, "EGYPTIAN HIEROGLYPH H008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13188, None, "EGYPTIAN HIEROGLYPH I001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13189, None, "EGYPTIAN HIEROGLYPH I002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1318A, None, "EGYPTIAN HIEROGLYPH I003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1318B, None, "EGYPTIAN HIEROGLYPH I004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1318C, None, "EGYPTIAN HIEROGLYPH I005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1318D, None, "EGYPTIAN HIEROGLYPH I005A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1318E, None, "EGYPTIAN HIEROGLYPH I006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1318F, None, "EGYPTIAN HIEROGLYPH I007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13190, None, "EGYPTIAN HIEROGLYPH I008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13191, None, "EGYPTIAN HIEROGLYPH I009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13192, None, "EGYPTIAN HIEROGLYPH I009A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13193, None, "EGYPTIAN HIEROGLYPH I010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13194, None, "EGYPTIAN HIEROGLYPH I010A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13195, None, "EGYPTIAN HIEROGLYPH I011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13196, None, "EGYPTIAN HIEROGLYPH I011A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13197, None, "EGYPTIAN HIEROGLYPH I012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13198, None, "EGYPTIAN HIEROGLYPH I013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13199, None, "EGYPTIAN HIEROGLYPH I014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1319A, None, "EGYPTIAN HIEROGLYPH I015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1319B, None, "EGYPTIAN HIEROGLYPH K001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1319C, None, "EGYPTIAN HIEROGLYPH K002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1319D, None, "EGYPTIAN HIEROGLYPH K003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1319E, None, "EGYPTIAN HIEROGLYPH K004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1319F, None, "EGYPTIAN HIEROGLYPH K005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131A0, None, "EGYPTIAN HIEROGLYPH K006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131A1, None, "EGYPTIAN HIEROGLYPH K007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131A2, None, "EGYPTIAN HIEROGLYPH K008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131A3, None, "EGYPTIAN HIEROGLYPH L001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131A4, None, "EGYPTIAN HIEROGLYPH L002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131A5, None, "EGYPTIAN HIEROGLYPH L002A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131A6, None, "EGYPTIAN HIEROGLYPH L003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131A7, None, "EGYPTIAN HIEROGLYPH L004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131A8, None, "EGYPTIAN HIEROGLYPH L005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131A9, None, "EGYPTIAN HIEROGLYPH L006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131AA, None, "EGYPTIAN HIEROGLYPH L006A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131AB, None, "EGYPTIAN HIEROGLYPH L007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131AC, None, "EGYPTIAN HIEROGLYPH L008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131AD, None, "EGYPTIAN HIEROGLYPH M001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131AE, None, "EGYPTIAN HIEROGLYPH M001A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131AF, None, "EGYPTIAN HIEROGLYPH M001B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131B0, None, "EGYPTIAN HIEROGLYPH M002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131B1, None, "EGYPTIAN HIEROGLYPH M003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131B2, None, "EGYPTIAN HIEROGLYPH M003A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131B3, None, "EGYPTIAN HIEROGLYPH M004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131B4, None, "EGYPTIAN HIEROGLYPH M005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131B5, None, "EGYPTIAN HIEROGLYPH M006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131B6, None, "EGYPTIAN HIEROGLYPH M007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131B7, None, "EGYPTIAN HIEROGLYPH M008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131B8, None, "EGYPTIAN HIEROGLYPH M009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131B9, None, "EGYPTIAN HIEROGLYPH M010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131BA, None, "EGYPTIAN HIEROGLYPH M010A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131BB, None, "EGYPTIAN HIEROGLYPH M011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131BC, None, "EGYPTIAN HIEROGLYPH M012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131BD, None, "EGYPTIAN HIEROGLYPH M012A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131BE, None, "EGYPTIAN HIEROGLYPH M012B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131BF, None, "EGYPTIAN HIEROGLYPH M012C", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131C0, None, "EGYPTIAN HIEROGLYPH M012D", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131C1, None, "EGYPTIAN HIEROGLYPH M012E", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131C2, None, "EGYPTIAN HIEROGLYPH M012F", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131C3, None, "EGYPTIAN HIEROGLYPH M012G", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131C4, None, "EGYPTIAN HIEROGLYPH M012H", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131C5, None, "EGYPTIAN HIEROGLYPH M013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131C6, None, "EGYPTIAN HIEROGLYPH M014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131C7, None, "EGYPTIAN HIEROGLYPH M015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131C8, None, "EGYPTIAN HIEROGLYPH M015A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131C9, None, "EGYPTIAN HIEROGLYPH M016", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131CA, None, "EGYPTIAN HIEROGLYPH M016A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131CB, None, "EGYPTIAN HIEROGLYPH M017", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131CC, None, "EGYPTIAN HIEROGLYPH M017A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131CD, None, "EGYPTIAN HIEROGLYPH M018", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131CE, None, "EGYPTIAN HIEROGLYPH M019", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131CF, None, "EGYPTIAN HIEROGLYPH M020", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131D0, None, "EGYPTIAN HIEROGLYPH M021", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131D1, None, "EGYPTIAN HIEROGLYPH M022", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131D2, None, "EGYPTIAN HIEROGLYPH M022A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131D3, None, "EGYPTIAN HIEROGLYPH M023", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131D4, None, "EGYPTIAN HIEROGLYPH M024", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131D5, None, "EGYPTIAN HIEROGLYPH M024A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131D6, None, "EGYPTIAN HIEROGLYPH M025", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131D7, None, "EGYPTIAN HIEROGLYPH M026", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131D8, None, "EGYPTIAN HIEROGLYPH M027", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131D9, None, "EGYPTIAN HIEROGLYPH M028", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131DA, None, "EGYPTIAN HIEROGLYPH M028A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131DB, None, "EGYPTIAN HIEROGLYPH M029", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131DC, None, "EGYPTIAN HIEROGLYPH M030", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131DD, None, "EGYPTIAN HIEROGLYPH M031", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131DE, None, "EGYPTIAN HIEROGLYPH M031A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131DF, None, "EGYPTIAN HIEROGLYPH M032", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131E0, None, "EGYPTIAN HIEROGLYPH M033", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131E1, None, "EGYPTIAN HIEROGLYPH M033A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131E2, None, "EGYPTIAN HIEROGLYPH M033B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131E3, None, "EGYPTIAN HIEROGLYPH M034", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131E4, None, "EGYPTIAN HIEROGLYPH M035", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131E5, None, "EGYPTIAN HIEROGLYPH M036", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131E6, None, "EGYPTIAN HIEROGLYPH M037", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131E7, None, "EGYPTIAN HIEROGLYPH M038", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131E8, None, "EGYPTIAN HIEROGLYPH M039", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131E9, None, "EGYPTIAN HIEROGLYPH M040", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131EA, None, "EGYPTIAN HIEROGLYPH M040A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131EB, None, "EGYPTIAN HIEROGLYPH M041", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131EC, None, "EGYPTIAN HIEROGLYPH M042", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131ED, None, "EGYPTIAN HIEROGLYPH M043", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131EE, None, "EGYPTIAN HIEROGLYPH M044", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131EF, None, "EGYPTIAN HIEROGLYPH N001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131F0, None, "EGYPTIAN HIEROGLYPH N002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131F1, None, "EGYPTIAN HIEROGLYPH N003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131F2, None, "EGYPTIAN HIEROGLYPH N004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131F3, None, "EGYPTIAN HIEROGLYPH N005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131F4, None, "EGYPTIAN HIEROGLYPH N006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131F5, None, "EGYPTIAN HIEROGLYPH N007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131F6, None, "EGYPTIAN HIEROGLYPH N008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131F7, None, "EGYPTIAN HIEROGLYPH N009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131F8, None, "EGYPTIAN HIEROGLYPH N010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131F9, None, "EGYPTIAN HIEROGLYPH N011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131FA, None, "EGYPTIAN HIEROGLYPH N012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131FB, None, "EGYPTIAN HIEROGLYPH N013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131FC, None, "EGYPTIAN HIEROGLYPH N014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131FD, None, "EGYPTIAN HIEROGLYPH N015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131FE, None, "EGYPTIAN HIEROGLYPH N016", 0x31, "Egyptian_Hieroglyphs"),
    c(0x131FF, None, "EGYPTIAN HIEROGLYPH N017", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13200, None, "EGYPTIAN HIEROGLYPH N018", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13201, None, "EGYPTIAN HIEROGLYPH N018A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13202, None, "EGYPTIAN HIEROGLYPH N018B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13203, None, "EGYPTIAN HIEROGLYPH N019", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13204, None, "EGYPTIAN HIEROGLYPH N020", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13205, None, "EGYPTIAN HIEROGLYPH N021", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13206, None, "EGYPTIAN HIEROGLYPH N022", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13207, None, "EGYPTIAN HIEROGLYPH N023", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13208, None, "EGYPTIAN HIEROGLYPH N024", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13209, None, "EGYPTIAN HIEROGLYPH N025", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1320A, None, "EGYPTIAN HIEROGLYPH N025A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1320B, None, "EGYPTIAN HIEROGLYPH N026", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1320C, None, "EGYPTIAN HIEROGLYPH N027", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1320D, None, "EGYPTIAN HIEROGLYPH N028", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1320E, None, "EGYPTIAN HIEROGLYPH N029", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1320F, None, "EGYPTIAN HIEROGLYPH N030", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13210, None, "EGYPTIAN HIEROGLYPH N031", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13211, None, "EGYPTIAN HIEROGLYPH N032", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13212, None, "EGYPTIAN HIEROGLYPH N033", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13213, None, "EGYPTIAN HIEROGLYPH N033A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13214, None, "EGYPTIAN HIEROGLYPH N034", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13215, None, "EGYPTIAN HIEROGLYPH N034A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13216, None, "EGYPTIAN HIEROGLYPH N035", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13217, None, "EGYPTIAN HIEROGLYPH N035A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13218, None, "EGYPTIAN HIEROGLYPH N036", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13219, None, "EGYPTIAN HIEROGLYPH N037", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1321A, None, "EGYPTIAN HIEROGLYPH N037A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1321B, None, "EGYPTIAN HIEROGLYPH N038", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1321C, None, "EGYPTIAN HIEROGLYPH N039", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1321D, None, "EGYPTIAN HIEROGLYPH N040", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1321E, None, "EGYPTIAN HIEROGLYPH N041", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1321F, None, "EGYPTIAN HIEROGLYPH N042", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13220, None, "EGYPTIAN HIEROGLYPH NL001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13221, None, "EGYPTIAN HIEROGLYPH NL002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13222, None, "EGYPTIAN HIEROGLYPH NL003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13223, None, "EGYPTIAN HIEROGLYPH NL004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13224, None, "EGYPTIAN HIEROGLYPH NL005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13225, None, "EGYPTIAN HIEROGLYPH NL005A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13226, None, "EGYPTIAN HIEROGLYPH NL006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13227, None, "EGYPTIAN HIEROGLYPH NL007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13228, None, "EGYPTIAN HIEROGLYPH NL008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13229, None, "EGYPTIAN HIEROGLYPH NL009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1322A, None, "EGYPTIAN HIEROGLYPH NL010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1322B, None, "EGYPTIAN HIEROGLYPH NL011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1322C, None, "EGYPTIAN HIEROGLYPH NL012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1322D, None, "EGYPTIAN HIEROGLYPH NL013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1322E, None, "EGYPTIAN HIEROGLYPH NL014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1322F, None, "EGYPTIAN HIEROGLYPH NL015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13230, None, "EGYPTIAN HIEROGLYPH NL016", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13231, None, "EGYPTIAN HIEROGLYPH NL017", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13232, None, "EGYPTIAN HIEROGLYPH NL017A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13233, None, "EGYPTIAN HIEROGLYPH NL018", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13234, None, "EGYPTIAN HIEROGLYPH NL019", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13235, None, "EGYPTIAN HIEROGLYPH NL020", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13236, None, "EGYPTIAN HIEROGLYPH NU001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13237, None, "EGYPTIAN HIEROGLYPH NU002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13238, None, "EGYPTIAN HIEROGLYPH NU003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13239, None, "EGYPTIAN HIEROGLYPH NU004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1323A, None, "EGYPTIAN HIEROGLYPH NU005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1323B, None, "EGYPTIAN HIEROGLYPH NU006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1323C, None, "EGYPTIAN HIEROGLYPH NU007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1323D, None, "EGYPTIAN HIEROGLYPH NU008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1323E, None, "EGYPTIAN HIEROGLYPH NU009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1323F, None, "EGYPTIAN HIEROGLYPH NU010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13240, None, "EGYPTIAN HIEROGLYPH NU010A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13241, None, "EGYPTIAN HIEROGLYPH NU011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13242, None, "EGYPTIAN HIEROGLYPH NU011A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13243, None, "EGYPTIAN HIEROGLYPH NU012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13244, None, "EGYPTIAN HIEROGLYPH NU013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13245, None, "EGYPTIAN HIEROGLYPH NU014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13246, None, "EGYPTIAN HIEROGLYPH NU015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13247, None, "EGYPTIAN HIEROGLYPH NU016", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13248, None, "EGYPTIAN HIEROGLYPH NU017", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13249, None, "EGYPTIAN HIEROGLYPH NU018", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1324A, None, "EGYPTIAN HIEROGLYPH NU018A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1324B, None, "EGYPTIAN HIEROGLYPH NU019", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1324C, None, "EGYPTIAN HIEROGLYPH NU020", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1324D, None, "EGYPTIAN HIEROGLYPH NU021", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1324E, None, "EGYPTIAN HIEROGLYPH NU022", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1324F, None, "EGYPTIAN HIEROGLYPH NU022A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13250, None, "EGYPTIAN HIEROGLYPH O001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13251, None, "EGYPTIAN HIEROGLYPH O001A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13252, None, "EGYPTIAN HIEROGLYPH O002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13253, None, "EGYPTIAN HIEROGLYPH O003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13254, None, "EGYPTIAN HIEROGLYPH O004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13255, None, "EGYPTIAN HIEROGLYPH O005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13256, None, "EGYPTIAN HIEROGLYPH O005A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13257, None, "EGYPTIAN HIEROGLYPH O006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13258, None, "EGYPTIAN HIEROGLYPH O006A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13259, None, "EGYPTIAN HIEROGLYPH O006B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1325A, None, "EGYPTIAN HIEROGLYPH O006C", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1325B, None, "EGYPTIAN HIEROGLYPH O006D", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1325C, None, "EGYPTIAN HIEROGLYPH O006E", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1325D, None, "EGYPTIAN HIEROGLYPH O006F", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1325E, None, "EGYPTIAN HIEROGLYPH O007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1325F, None, "EGYPTIAN HIEROGLYPH O008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13260, None, "EGYPTIAN HIEROGLYPH O009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13261, None, "EGYPTIAN HIEROGLYPH O010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13262, None, "EGYPTIAN HIEROGLYPH O010A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13263, None, "EGYPTIAN HIEROGLYPH O010B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13264, None, "EGYPTIAN HIEROGLYPH O010C", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13265, None, "EGYPTIAN HIEROGLYPH O011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13266, None, "EGYPTIAN HIEROGLYPH O012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13267, None, "EGYPTIAN HIEROGLYPH O013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13268, None, "EGYPTIAN HIEROGLYPH O014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13269, None, "EGYPTIAN HIEROGLYPH O015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1326A, None, "EGYPTIAN HIEROGLYPH O016", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1326B, None, "EGYPTIAN HIEROGLYPH O017", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1326C, None, "EGYPTIAN HIEROGLYPH O018", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1326D, None, "EGYPTIAN HIEROGLYPH O019", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1326E, None, "EGYPTIAN HIEROGLYPH O019A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1326F, None, "EGYPTIAN HIEROGLYPH O020", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13270, None, "EGYPTIAN HIEROGLYPH O020A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13271, None, "EGYPTIAN HIEROGLYPH O021", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13272, None, "EGYPTIAN HIEROGLYPH O022", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13273, None, "EGYPTIAN HIEROGLYPH O023", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13274, None, "EGYPTIAN HIEROGLYPH O024", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13275, None, "EGYPTIAN HIEROGLYPH O024A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13276, None, "EGYPTIAN HIEROGLYPH O025", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13277, None, "EGYPTIAN HIEROGLYPH O025A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13278, None, "EGYPTIAN HIEROGLYPH O026", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13279, None, "EGYPTIAN HIEROGLYPH O027", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1327A, None, "EGYPTIAN HIEROGLYPH O028", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1327B, None, "EGYPTIAN HIEROGLYPH O029", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1327C, None, "EGYPTIAN HIEROGLYPH O029A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1327D, None, "EGYPTIAN HIEROGLYPH O030", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1327E, None, "EGYPTIAN HIEROGLYPH O030A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1327F, None, "EGYPTIAN HIEROGLYPH O031", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13280, None, "EGYPTIAN HIEROGLYPH O032", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13281, None, "EGYPTIAN HIEROGLYPH O033", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13282, None, "EGYPTIAN HIEROGLYPH O033A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13283, None, "EGYPTIAN HIEROGLYPH O034", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13284, None, "EGYPTIAN HIEROGLYPH O035", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13285, None, "EGYPTIAN HIEROGLYPH O036", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13286, None, "EGYPTIAN HIEROGLYPH O036A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13287, None, "EGYPTIAN HIEROGLYPH O036B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13288, None, "EGYPTIAN HIEROGLYPH O036C", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13289, None, "EGYPTIAN HIEROGLYPH O036D", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1328A, None, "EGYPTIAN HIEROGLYPH O037", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1328B, None, "EGYPTIAN HIEROGLYPH O038", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1328C, None, "EGYPTIAN HIEROGLYPH O039", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1328D, None, "EGYPTIAN HIEROGLYPH O040", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1328E, None, "EGYPTIAN HIEROGLYPH O041", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1328F, None, "EGYPTIAN HIEROGLYPH O042", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13290, None, "EGYPTIAN HIEROGLYPH O043", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13291, None, "EGYPTIAN HIEROGLYPH O044", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13292, None, "EGYPTIAN HIEROGLYPH O045", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13293, None, "EGYPTIAN HIEROGLYPH O046", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13294, None, "EGYPTIAN HIEROGLYPH O047", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13295, None, "EGYPTIAN HIEROGLYPH O048", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13296, None, "EGYPTIAN HIEROGLYPH O049", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13297, None, "EGYPTIAN HIEROGLYPH O050", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13298, None, "EGYPTIAN HIEROGLYPH O050A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13299, None, "EGYPTIAN HIEROGLYPH O050B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1329A, None, "EGYPTIAN HIEROGLYPH O051", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1329B, None, "EGYPTIAN HIEROGLYPH P001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1329C, None, "EGYPTIAN HIEROGLYPH P001A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1329D, None, "EGYPTIAN HIEROGLYPH P002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1329E, None, "EGYPTIAN HIEROGLYPH P003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1329F, None, "EGYPTIAN HIEROGLYPH P003A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132A0, None, "EGYPTIAN HIEROGLYPH P004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132A1, None, "EGYPTIAN HIEROGLYPH P005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132A2, None, "EGYPTIAN HIEROGLYPH P006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132A3, None, "EGYPTIAN HIEROGLYPH P007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132A4, None, "EGYPTIAN HIEROGLYPH P008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132A5, None, "EGYPTIAN HIEROGLYPH P009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132A6, None, "EGYPTIAN HIEROGLYPH P010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132A7, None, "EGYPTIAN HIEROGLYPH P011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132A8, None, "EGYPTIAN HIEROGLYPH Q001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132A9, None, "EGYPTIAN HIEROGLYPH Q002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132AA, None, "EGYPTIAN HIEROGLYPH Q003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132AB, None, "EGYPTIAN HIEROGLYPH Q004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132AC, None, "EGYPTIAN HIEROGLYPH Q005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132AD, None, "EGYPTIAN HIEROGLYPH Q006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132AE, None, "EGYPTIAN HIEROGLYPH Q007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132AF, None, "EGYPTIAN HIEROGLYPH R001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132B0, None, "EGYPTIAN HIEROGLYPH R002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132B1, None, "EGYPTIAN HIEROGLYPH R002A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132B2, None, "EGYPTIAN HIEROGLYPH R003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132B3, None, "EGYPTIAN HIEROGLYPH R003A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132B4, None, "EGYPTIAN HIEROGLYPH R003B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132B5, None, "EGYPTIAN HIEROGLYPH R004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132B6, None, "EGYPTIAN HIEROGLYPH R005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132B7, None, "EGYPTIAN HIEROGLYPH R006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132B8, None, "EGYPTIAN HIEROGLYPH R007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132B9, None, "EGYPTIAN HIEROGLYPH R008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132BA, None, "EGYPTIAN HIEROGLYPH R009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132BB, None, "EGYPTIAN HIEROGLYPH R010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132BC, None, "EGYPTIAN HIEROGLYPH R010A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132BD, None, "EGYPTIAN HIEROGLYPH R011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132BE, None, "EGYPTIAN HIEROGLYPH R012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132BF, None, "EGYPTIAN HIEROGLYPH R013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132C0, None, "EGYPTIAN HIEROGLYPH R014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132C1, None, "EGYPTIAN HIEROGLYPH R015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132C2, None, "EGYPTIAN HIEROGLYPH R016", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132C3, None, "EGYPTIAN HIEROGLYPH R016A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132C4, None, "EGYPTIAN HIEROGLYPH R017", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132C5, None, "EGYPTIAN HIEROGLYPH R018", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132C6, None, "EGYPTIAN HIEROGLYPH R019", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132C7, None, "EGYPTIAN HIEROGLYPH R020", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132C8, None, "EGYPTIAN HIEROGLYPH R021", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132C9, None, "EGYPTIAN HIEROGLYPH R022", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132CA, None, "EGYPTIAN HIEROGLYPH R023", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132CB, None, "EGYPTIAN HIEROGLYPH R024", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132CC, None, "EGYPTIAN HIEROGLYPH R025", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132CD, None, "EGYPTIAN HIEROGLYPH R026", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132CE, None, "EGYPTIAN HIEROGLYPH R027", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132CF, None, "EGYPTIAN HIEROGLYPH R028", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132D0, None, "EGYPTIAN HIEROGLYPH R029", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132D1, None, "EGYPTIAN HIEROGLYPH S001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132D2, None, "EGYPTIAN HIEROGLYPH S002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132D3, None, "EGYPTIAN HIEROGLYPH S002A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132D4, None, "EGYPTIAN HIEROGLYPH S003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132D5, None, "EGYPTIAN HIEROGLYPH S004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132D6, None, "EGYPTIAN HIEROGLYPH S005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132D7, None, "EGYPTIAN HIEROGLYPH S006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132D8, None, "EGYPTIAN HIEROGLYPH S006A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132D9, None, "EGYPTIAN HIEROGLYPH S007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132DA, None, "EGYPTIAN HIEROGLYPH S008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132DB, None, "EGYPTIAN HIEROGLYPH S009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132DC, None, "EGYPTIAN HIEROGLYPH S010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132DD, None, "EGYPTIAN HIEROGLYPH S011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132DE, None, "EGYPTIAN HIEROGLYPH S012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132DF, None, "EGYPTIAN HIEROGLYPH S013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132E0, None, "EGYPTIAN HIEROGLYPH S014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132E1, None, "EGYPTIAN HIEROGLYPH S014A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132E2, None, "EGYPTIAN HIEROGLYPH S014B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132E3, None, "EGYPTIAN HIEROGLYPH S015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132E4, None, "EGYPTIAN HIEROGLYPH S016", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132E5, None, "EGYPTIAN HIEROGLYPH S017", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132E6, None, "EGYPTIAN HIEROGLYPH S017A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132E7, None, "EGYPTIAN HIEROGLYPH S018", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132E8, None, "EGYPTIAN HIEROGLYPH S019", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132E9, None, "EGYPTIAN HIEROGLYPH S020", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132EA, None, "EGYPTIAN HIEROGLYPH S021", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132EB, None, "EGYPTIAN HIEROGLYPH S022", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132EC, None, "EGYPTIAN HIEROGLYPH S023", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132ED, None, "EGYPTIAN HIEROGLYPH S024", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132EE, None, "EGYPTIAN HIEROGLYPH S025", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132EF, None, "EGYPTIAN HIEROGLYPH S026", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132F0, None, "EGYPTIAN HIEROGLYPH S026A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132F1, None, "EGYPTIAN HIEROGLYPH S026B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132F2, None, "EGYPTIAN HIEROGLYPH S027", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132F3, None, "EGYPTIAN HIEROGLYPH S028", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132F4, None, "EGYPTIAN HIEROGLYPH S029", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132F5, None, "EGYPTIAN HIEROGLYPH S030", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132F6, None, "EGYPTIAN HIEROGLYPH S031", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132F7, None, "EGYPTIAN HIEROGLYPH S032", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132F8, None, "EGYPTIAN HIEROGLYPH S033", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132F9, None, "EGYPTIAN HIEROGLYPH S034", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132FA, None, "EGYPTIAN HIEROGLYPH S035", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132FB, None, "EGYPTIAN HIEROGLYPH S035A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132FC, None, "EGYPTIAN HIEROGLYPH S036", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132FD, None, "EGYPTIAN HIEROGLYPH S037", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132FE, None, "EGYPTIAN HIEROGLYPH S038", 0x31, "Egyptian_Hieroglyphs"),
    c(0x132FF, None, "EGYPTIAN HIEROGLYPH S039", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13300, None, "EGYPTIAN HIEROGLYPH S040", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13301, None, "EGYPTIAN HIEROGLYPH S041", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13302, None, "EGYPTIAN HIEROGLYPH S042", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13303, None, "EGYPTIAN HIEROGLYPH S043", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13304, None, "EGYPTIAN HIEROGLYPH S044", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13305, None, "EGYPTIAN HIEROGLYPH S045", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13306, None, "EGYPTIAN HIEROGLYPH S046", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13307, None, "EGYPTIAN HIEROGLYPH T001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13308, None, "EGYPTIAN HIEROGLYPH T002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13309, None, "EGYPTIAN HIEROGLYPH T003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1330A, None, "EGYPTIAN HIEROGLYPH T003A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1330B, None, "EGYPTIAN HIEROGLYPH T004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1330C, None, "EGYPTIAN HIEROGLYPH T005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1330D, None, "EGYPTIAN HIEROGLYPH T006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1330E, None, "EGYPTIAN HIEROGLYPH T007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1330F, None, "EGYPTIAN HIEROGLYPH T007A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13310, None, "EGYPTIAN HIEROGLYPH T008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13311, None, "EGYPTIAN HIEROGLYPH T008A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13312, None, "EGYPTIAN HIEROGLYPH T009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13313, None, "EGYPTIAN HIEROGLYPH T009A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13314, None, "EGYPTIAN HIEROGLYPH T010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13315, None, "EGYPTIAN HIEROGLYPH T011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13316, None, "EGYPTIAN HIEROGLYPH T011A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13317, None, "EGYPTIAN HIEROGLYPH T012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13318, None, "EGYPTIAN HIEROGLYPH T013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13319, None, "EGYPTIAN HIEROGLYPH T014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1331A, None, "EGYPTIAN HIEROGLYPH T015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1331B, None, "EGYPTIAN HIEROGLYPH T016", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1331C, None, "EGYPTIAN HIEROGLYPH T016A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1331D, None, "EGYPTIAN HIEROGLYPH T017", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1331E, None, "EGYPTIAN HIEROGLYPH T018", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1331F, None, "EGYPTIAN HIEROGLYPH T019", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13320, None, "EGYPTIAN HIEROGLYPH T020", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13321, None, "EGYPTIAN HIEROGLYPH T021", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13322, None, "EGYPTIAN HIEROGLYPH T022", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13323, None, "EGYPTIAN HIEROGLYPH T023", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13324, None, "EGYPTIAN HIEROGLYPH T024", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13325, None, "EGYPTIAN HIEROGLYPH T025", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13326, None, "EGYPTIAN HIEROGLYPH T026", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13327, None, "EGYPTIAN HIEROGLYPH T027", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13328, None, "EGYPTIAN HIEROGLYPH T028", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13329, None, "EGYPTIAN HIEROGLYPH T029", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1332A, None, "EGYPTIAN HIEROGLYPH T030", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1332B, None, "EGYPTIAN HIEROGLYPH T031", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1332C, None, "EGYPTIAN HIEROGLYPH T032", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1332D, None, "EGYPTIAN HIEROGLYPH T032A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1332E, None, "EGYPTIAN HIEROGLYPH T033", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1332F, None, "EGYPTIAN HIEROGLYPH T033A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13330, None, "EGYPTIAN HIEROGLYPH T034", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13331, None, "EGYPTIAN HIEROGLYPH T035", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13332, None, "EGYPTIAN HIEROGLYPH T036", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13333, None, "EGYPTIAN HIEROGLYPH U001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13334, None, "EGYPTIAN HIEROGLYPH U002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13335, None, "EGYPTIAN HIEROGLYPH U003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13336, None, "EGYPTIAN HIEROGLYPH U004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13337, None, "EGYPTIAN HIEROGLYPH U005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13338, None, "EGYPTIAN HIEROGLYPH U006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13339, None, "EGYPTIAN HIEROGLYPH U006A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1333A, None, "EGYPTIAN HIEROGLYPH U006B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1333B, None, "EGYPTIAN HIEROGLYPH U007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1333C, None, "EGYPTIAN HIEROGLYPH U008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1333D, None, "EGYPTIAN HIEROGLYPH U009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1333E, None, "EGYPTIAN HIEROGLYPH U010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1333F, None, "EGYPTIAN HIEROGLYPH U011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13340, None, "EGYPTIAN HIEROGLYPH U012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13341, None, "EGYPTIAN HIEROGLYPH U013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13342, None, "EGYPTIAN HIEROGLYPH U014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13343, None, "EGYPTIAN HIEROGLYPH U015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13344, None, "EGYPTIAN HIEROGLYPH U016", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13345, None, "EGYPTIAN HIEROGLYPH U017", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13346, None, "EGYPTIAN HIEROGLYPH U018", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13347, None, "EGYPTIAN HIEROGLYPH U019", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13348, None, "EGYPTIAN HIEROGLYPH U020", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13349, None, "EGYPTIAN HIEROGLYPH U021", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1334A, None, "EGYPTIAN HIEROGLYPH U022", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1334B, None, "EGYPTIAN HIEROGLYPH U023", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1334C, None, "EGYPTIAN HIEROGLYPH U023A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1334D, None, "EGYPTIAN HIEROGLYPH U024", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1334E, None, "EGYPTIAN HIEROGLYPH U025", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1334F, None, "EGYPTIAN HIEROGLYPH U026", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13350, None, "EGYPTIAN HIEROGLYPH U027", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13351, None, "EGYPTIAN HIEROGLYPH U028", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13352, None, "EGYPTIAN HIEROGLYPH U029", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13353, None, "EGYPTIAN HIEROGLYPH U029A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13354, None, "EGYPTIAN HIEROGLYPH U030", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13355, None, "EGYPTIAN HIEROGLYPH U031", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13356, None, "EGYPTIAN HIEROGLYPH U032", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13357, None, "EGYPTIAN HIEROGLYPH U032A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13358, None, "EGYPTIAN HIEROGLYPH U033", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13359, None, "EGYPTIAN HIEROGLYPH U034", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1335A, None, "EGYPTIAN HIEROGLYPH U035", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1335B, None, "EGYPTIAN HIEROGLYPH U036", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1335C, None, "EGYPTIAN HIEROGLYPH U037", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1335D, None, "EGYPTIAN HIEROGLYPH U038", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1335E, None, "EGYPTIAN HIEROGLYPH U039", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1335F, None, "EGYPTIAN HIEROGLYPH U040", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13360, None, "EGYPTIAN HIEROGLYPH U041", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13361, None, "EGYPTIAN HIEROGLYPH U042", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13362, None, "EGYPTIAN HIEROGLYPH V001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13363, None, "EGYPTIAN HIEROGLYPH V001A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13364, None, "EGYPTIAN HIEROGLYPH V001B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13365, None, "EGYPTIAN HIEROGLYPH V001C", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13366, None, "EGYPTIAN HIEROGLYPH V001D", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13367, None, "EGYPTIAN HIEROGLYPH V001E", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13368, None, "EGYPTIAN HIEROGLYPH V001F", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13369, None, "EGYPTIAN HIEROGLYPH V001G", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1336A, None, "EGYPTIAN HIEROGLYPH V001H", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1336B, None, "EGYPTIAN HIEROGLYPH V001I", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1336C, None, "EGYPTIAN HIEROGLYPH V002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1336D, None, "EGYPTIAN HIEROGLYPH V002A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1336E, None, "EGYPTIAN HIEROGLYPH V003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1336F, None, "EGYPTIAN HIEROGLYPH V004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13370, None, "EGYPTIAN HIEROGLYPH V005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13371, None, "EGYPTIAN HIEROGLYPH V006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13372, None, "EGYPTIAN HIEROGLYPH V007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13373, None, "EGYPTIAN HIEROGLYPH V007A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13374, None, "EGYPTIAN HIEROGLYPH V007B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13375, None, "EGYPTIAN HIEROGLYPH V008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13376, None, "EGYPTIAN HIEROGLYPH V009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13377, None, "EGYPTIAN HIEROGLYPH V010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13378, None, "EGYPTIAN HIEROGLYPH V011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13379, None, "EGYPTIAN HIEROGLYPH V011A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1337A, None, "EGYPTIAN HIEROGLYPH V011B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1337B, None, "EGYPTIAN HIEROGLYPH V011C", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1337C, None, "EGYPTIAN HIEROGLYPH V012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1337D, None, "EGYPTIAN HIEROGLYPH V012A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1337E, None, "EGYPTIAN HIEROGLYPH V012B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1337F, None, "EGYPTIAN HIEROGLYPH V013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13380, None, "EGYPTIAN HIEROGLYPH V014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13381, None, "EGYPTIAN HIEROGLYPH V015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13382, None, "EGYPTIAN HIEROGLYPH V016", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13383, None, "EGYPTIAN HIEROGLYPH V017", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13384, None, "EGYPTIAN HIEROGLYPH V018", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13385, None, "EGYPTIAN HIEROGLYPH V019", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13386, None, "EGYPTIAN HIEROGLYPH V020", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13387, None, "EGYPTIAN HIEROGLYPH V020A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13388, None, "EGYPTIAN HIEROGLYPH V020B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13389, None, "EGYPTIAN HIEROGLYPH V020C", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1338A, None, "EGYPTIAN HIEROGLYPH V020D", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1338B, None, "EGYPTIAN HIEROGLYPH V020E", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1338C, None, "EGYPTIAN HIEROGLYPH V020F", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1338D, None, "EGYPTIAN HIEROGLYPH V020G", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1338E, None, "EGYPTIAN HIEROGLYPH V020H", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1338F, None, "EGYPTIAN HIEROGLYPH V020I", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13390, None, "EGYPTIAN HIEROGLYPH V020J", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13391, None, "EGYPTIAN HIEROGLYPH V020K", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13392, None, "EGYPTIAN HIEROGLYPH V020L", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13393, None, "EGYPTIAN HIEROGLYPH V021", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13394, None, "EGYPTIAN HIEROGLYPH V022", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13395, None, "EGYPTIAN HIEROGLYPH V023", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13396, None, "EGYPTIAN HIEROGLYPH V023A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13397, None, "EGYPTIAN HIEROGLYPH V024", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13398, None, "EGYPTIAN HIEROGLYPH V025", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13399, None, "EGYPTIAN HIEROGLYPH V026", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1339A, None, "EGYPTIAN HIEROGLYPH V027", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1339B, None, "EGYPTIAN HIEROGLYPH V028", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1339C, None, "EGYPTIAN HIEROGLYPH V028A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1339D, None, "EGYPTIAN HIEROGLYPH V029", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1339E, None, "EGYPTIAN HIEROGLYPH V029A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1339F, None, "EGYPTIAN HIEROGLYPH V030", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133A0, None, "EGYPTIAN HIEROGLYPH V030A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133A1, None, "EGYPTIAN HIEROGLYPH V031", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133A2, None, "EGYPTIAN HIEROGLYPH V031A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133A3, None, "EGYPTIAN HIEROGLYPH V032", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133A4, None, "EGYPTIAN HIEROGLYPH V033", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133A5, None, "EGYPTIAN HIEROGLYPH V033A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133A6, None, "EGYPTIAN HIEROGLYPH V034", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133A7, None, "EGYPTIAN HIEROGLYPH V035", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133A8, None, "EGYPTIAN HIEROGLYPH V036", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133A9, None, "EGYPTIAN HIEROGLYPH V037", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133AA, None, "EGYPTIAN HIEROGLYPH V037A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133AB, None, "EGYPTIAN HIEROGLYPH V038", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133AC, None, "EGYPTIAN HIEROGLYPH V039", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133AD, None, "EGYPTIAN HIEROGLYPH V040", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133AE, None, "EGYPTIAN HIEROGLYPH V040A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133AF, None, "EGYPTIAN HIEROGLYPH W001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133B0, None, "EGYPTIAN HIEROGLYPH W002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133B1, None, "EGYPTIAN HIEROGLYPH W003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133B2, None, "EGYPTIAN HIEROGLYPH W003A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133B3, None, "EGYPTIAN HIEROGLYPH W004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133B4, None, "EGYPTIAN HIEROGLYPH W005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133B5, None, "EGYPTIAN HIEROGLYPH W006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133B6, None, "EGYPTIAN HIEROGLYPH W007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133B7, None, "EGYPTIAN HIEROGLYPH W008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133B8, None, "EGYPTIAN HIEROGLYPH W009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133B9, None, "EGYPTIAN HIEROGLYPH W009A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133BA, None, "EGYPTIAN HIEROGLYPH W010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133BB, None, "EGYPTIAN HIEROGLYPH W010A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133BC, None, "EGYPTIAN HIEROGLYPH W011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133BD, None, "EGYPTIAN HIEROGLYPH W012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133BE, None, "EGYPTIAN HIEROGLYPH W013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133BF, None, "EGYPTIAN HIEROGLYPH W014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133C0, None, "EGYPTIAN HIEROGLYPH W014A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133C1, None, "EGYPTIAN HIEROGLYPH W015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133C2, None, "EGYPTIAN HIEROGLYPH W016", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133C3, None, "EGYPTIAN HIEROGLYPH W017", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133C4, None, "EGYPTIAN HIEROGLYPH W017A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133C5, None, "EGYPTIAN HIEROGLYPH W018", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133C6, None, "EGYPTIAN HIEROGLYPH W018A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133C7, None, "EGYPTIAN HIEROGLYPH W019", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133C8, None, "EGYPTIAN HIEROGLYPH W020", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133C9, None, "EGYPTIAN HIEROGLYPH W021", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133CA, None, "EGYPTIAN HIEROGLYPH W022", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133CB, None, "EGYPTIAN HIEROGLYPH W023", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133CC, None, "EGYPTIAN HIEROGLYPH W024", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133CD, None, "EGYPTIAN HIEROGLYPH W024A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133CE, None, "EGYPTIAN HIEROGLYPH W025", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133CF, None, "EGYPTIAN HIEROGLYPH X001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133D0, None, "EGYPTIAN HIEROGLYPH X002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133D1, None, "EGYPTIAN HIEROGLYPH X003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133D2, None, "EGYPTIAN HIEROGLYPH X004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133D3, None, "EGYPTIAN HIEROGLYPH X004A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133D4, None, "EGYPTIAN HIEROGLYPH X004B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133D5, None, "EGYPTIAN HIEROGLYPH X005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133D6, None, "EGYPTIAN HIEROGLYPH X006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133D7, None, "EGYPTIAN HIEROGLYPH X006A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133D8, None, "EGYPTIAN HIEROGLYPH X007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133D9, None, "EGYPTIAN HIEROGLYPH X008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133DA, None, "EGYPTIAN HIEROGLYPH X008A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133DB, None, "EGYPTIAN HIEROGLYPH Y001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133DC, None, "EGYPTIAN HIEROGLYPH Y001A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133DD, None, "EGYPTIAN HIEROGLYPH Y002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133DE, None, "EGYPTIAN HIEROGLYPH Y003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133DF, None, "EGYPTIAN HIEROGLYPH Y004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133E0, None, "EGYPTIAN HIEROGLYPH Y005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133E1, None, "EGYPTIAN HIEROGLYPH Y006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133E2, None, "EGYPTIAN HIEROGLYPH Y007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133E3, None, "EGYPTIAN HIEROGLYPH Y008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133E4, None, "EGYPTIAN HIEROGLYPH Z001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133E5, None, "EGYPTIAN HIEROGLYPH Z002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133E6, None, "EGYPTIAN HIEROGLYPH Z002A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133E7, None, "EGYPTIAN HIEROGLYPH Z002B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133E8, None, "EGYPTIAN HIEROGLYPH Z002C", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133E9, None, "EGYPTIAN HIEROGLYPH Z002D", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133EA, None, "EGYPTIAN HIEROGLYPH Z003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133EB, None, "EGYPTIAN HIEROGLYPH Z003A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133EC, None, "EGYPTIAN HIEROGLYPH Z003B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133ED, None, "EGYPTIAN HIEROGLYPH Z004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133EE, None, "EGYPTIAN HIEROGLYPH Z004A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133EF, None, "EGYPTIAN HIEROGLYPH Z005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133F0, None, "EGYPTIAN HIEROGLYPH Z005A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133F1, None, "EGYPTIAN HIEROGLYPH Z006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133F2, None, "EGYPTIAN HIEROGLYPH Z007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133F3, None, "EGYPTIAN HIEROGLYPH Z008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133F4, None, "EGYPTIAN HIEROGLYPH Z009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133F5, None, "EGYPTIAN HIEROGLYPH Z010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133F6, None, "EGYPTIAN HIEROGLYPH Z011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133F7, None, "EGYPTIAN HIEROGLYPH Z012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133F8, None, "EGYPTIAN HIEROGLYPH Z013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133F9, None, "EGYPTIAN HIEROGLYPH Z014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133FA, None, "EGYPTIAN HIEROGLYPH Z015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133FB, None, "EGYPTIAN HIEROGLYPH Z015A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133FC, None, "EGYPTIAN HIEROGLYPH Z015B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133FD, None, "EGYPTIAN HIEROGLYPH Z015C", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133FE, None, "EGYPTIAN HIEROGLYPH Z015D", 0x31, "Egyptian_Hieroglyphs"),
    c(0x133FF, None, "EGYPTIAN HIEROGLYPH Z015E", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13400, None, "EGYPTIAN HIEROGLYPH Z015F", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13401, None, "EGYPTIAN HIEROGLYPH Z015G", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13402, None, "EGYPTIAN HIEROGLYPH Z015H", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13403, None, "EGYPTIAN HIEROGLYPH Z015I", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13404, None, "EGYPTIAN HIEROGLYPH Z016", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13405, None, "EGYPTIAN HIEROGLYPH Z016A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13406, None, "EGYPTIAN HIEROGLYPH Z016B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13407, None, "EGYPTIAN HIEROGLYPH Z016C", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13408, None, "EGYPTIAN HIEROGLYPH Z016D", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13409, None, "EGYPTIAN HIEROGLYPH Z016E", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1340A, None, "EGYPTIAN HIEROGLYPH Z016F", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1340B, None, "EGYPTIAN HIEROGLYPH Z016G", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1340C, None, "EGYPTIAN HIEROGLYPH Z016H", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1340D, None, "EGYPTIAN HIEROGLYPH AA001", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1340E, None, "EGYPTIAN HIEROGLYPH AA002", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1340F, None, "EGYPTIAN HIEROGLYPH AA003", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13410, None, "EGYPTIAN HIEROGLYPH AA004", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13411, None, "EGYPTIAN HIEROGLYPH AA005", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13412, None, "EGYPTIAN HIEROGLYPH AA006", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13413, None, "EGYPTIAN HIEROGLYPH AA007", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13414, None, "EGYPTIAN HIEROGLYPH AA007A", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13415, None, "EGYPTIAN HIEROGLYPH AA007B", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13416, None, "EGYPTIAN HIEROGLYPH AA008", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13417, None, "EGYPTIAN HIEROGLYPH AA009", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13418, None, "EGYPTIAN HIEROGLYPH AA010", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13419, None, "EGYPTIAN HIEROGLYPH AA011", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1341A, None, "EGYPTIAN HIEROGLYPH AA012", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1341B, None, "EGYPTIAN HIEROGLYPH AA013", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1341C, None, "EGYPTIAN HIEROGLYPH AA014", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1341D, None, "EGYPTIAN HIEROGLYPH AA015", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1341E, None, "EGYPTIAN HIEROGLYPH AA016", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1341F, None, "EGYPTIAN HIEROGLYPH AA017", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13420, None, "EGYPTIAN HIEROGLYPH AA018", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13421, None, "EGYPTIAN HIEROGLYPH AA019", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13422, None, "EGYPTIAN HIEROGLYPH AA020", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13423, None, "EGYPTIAN HIEROGLYPH AA021", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13424, None, "EGYPTIAN HIEROGLYPH AA022", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13425, None, "EGYPTIAN HIEROGLYPH AA023", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13426, None, "EGYPTIAN HIEROGLYPH AA024", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13427, None, "EGYPTIAN HIEROGLYPH AA025", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13428, None, "EGYPTIAN HIEROGLYPH AA026", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13429, None, "EGYPTIAN HIEROGLYPH AA027", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1342A, None, "EGYPTIAN HIEROGLYPH AA028", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1342B, None, "EGYPTIAN HIEROGLYPH AA029", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1342C, None, "EGYPTIAN HIEROGLYPH AA030", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1342D, None, "EGYPTIAN HIEROGLYPH AA031", 0x31, "Egyptian_Hieroglyphs"),
    c(0x1342E, None, "EGYPTIAN HIEROGLYPH AA032", 0x31, "Egyptian_Hieroglyphs"),
    c(0x13430, None, "EGYPTIAN HIEROGLYPH VERTICAL JOINER", 0x00, "Egyptian_Hieroglyph_Format_Controls"),
    c(0x13431, None, "EGYPTIAN HIEROGLYPH HORIZONTAL JOINER", 0x00, "Egyptian_Hieroglyph_Format_Controls"),
    c(0x13432, None, "EGYPTIAN HIEROGLYPH INSERT AT TOP START", 0x00, "Egyptian_Hieroglyph_Format_Controls"),
    c(0x13433, None, "EGYPTIAN HIEROGLYPH INSERT AT BOTTOM START", 0x00, "Egyptian_Hieroglyph_Format_Controls"),
    c(0x13434, None, "EGYPTIAN HIEROGLYPH INSERT AT TOP END", 0x00, "Egyptian_Hieroglyph_Format_Controls"),
    c(0x13435, None, "EGYPTIAN HIEROGLYPH INSERT AT BOTTOM END", 0x00, "Egyptian_Hieroglyph_Format_Controls"),
    c(0x13436, None, "EGYPTIAN HIEROGLYPH OVERLAY MIDDLE", 0x00, "Egyptian_Hieroglyph_Format_Controls"),
    c(0x13437, None, "EGYPTIAN HIEROGLYPH BEGIN SEGMENT", 0x00, "Egyptian_Hieroglyph_Format_Controls"),
    c(0x13438, None, "EGYPTIAN HIEROGLYPH END SEGMENT", 0x00, "Egyptian_Hieroglyph_Format_Controls"),
    c(0x14400, None, "ANATOLIAN HIEROGLYPH A001", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14401, None, "ANATOLIAN HIEROGLYPH A002", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14402, None, "ANATOLIAN HIEROGLYPH A003", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14403, None, "ANATOLIAN HIEROGLYPH A004", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14404, None, "ANATOLIAN HIEROGLYPH A005", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14405, None, "ANATOLIAN HIEROGLYPH A006", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14406, None, "ANATOLIAN HIEROGLYPH A007", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14407, None, "ANATOLIAN HIEROGLYPH A008", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14408, None, "ANATOLIAN HIEROGLYPH A009", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14409, None, "ANATOLIAN HIEROGLYPH A010", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1440A, None, "ANATOLIAN HIEROGLYPH A010A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1440B, None, "ANATOLIAN HIEROGLYPH A011", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1440C, None, "ANATOLIAN HIEROGLYPH A012", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1440D, None, "ANATOLIAN HIEROGLYPH A013", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1440E, None, "ANATOLIAN HIEROGLYPH A014", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1440F, None, "ANATOLIAN HIEROGLYPH A015", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14410, None, "ANATOLIAN HIEROGLYPH A016", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14411, None, "ANATOLIAN HIEROGLYPH A017", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14412, None, "ANATOLIAN HIEROGLYPH A018", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14413, None, "ANATOLIAN HIEROGLYPH A019", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14414, None, "ANATOLIAN HIEROGLYPH A020", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14415, None, "ANATOLIAN HIEROGLYPH A021", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14416, None, "ANATOLIAN HIEROGLYPH A022", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14417, None, "ANATOLIAN HIEROGLYPH A023", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14418, None, "ANATOLIAN HIEROGLYPH A024", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14419, None, "ANATOLIAN HIEROGLYPH A025", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1441A, None, "ANATOLIAN HIEROGLYPH A026", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1441B, None, "ANATOLIAN HIEROGLYPH A026A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1441C, None, "ANATOLIAN HIEROGLYPH A027", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1441D, None, "ANATOLIAN HIEROGLYPH A028", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1441E, None, "ANATOLIAN HIEROGLYPH A029", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1441F, None, "ANATOLIAN HIEROGLYPH A030", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14420, None, "ANATOLIAN HIEROGLYPH A031", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14421, None, "ANATOLIAN HIEROGLYPH A032", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14422, None, "ANATOLIAN HIEROGLYPH A033", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14423, None, "ANATOLIAN HIEROGLYPH A034", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14424, None, "ANATOLIAN HIEROGLYPH A035", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14425, None, "ANATOLIAN HIEROGLYPH A036", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14426, None, "ANATOLIAN HIEROGLYPH A037", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14427, None, "ANATOLIAN HIEROGLYPH A038", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14428, None, "ANATOLIAN HIEROGLYPH A039", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14429, None, "ANATOLIAN HIEROGLYPH A039A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1442A, None, "ANATOLIAN HIEROGLYPH A040", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1442B, None, "ANATOLIAN HIEROGLYPH A041", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1442C, None, "ANATOLIAN HIEROGLYPH A041A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1442D, None, "ANATOLIAN HIEROGLYPH A042", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1442E, None, "ANATOLIAN HIEROGLYPH A043", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1442F, None, "ANATOLIAN HIEROGLYPH A044", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14430, None, "ANATOLIAN HIEROGLYPH A045", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14431, None, "ANATOLIAN HIEROGLYPH A045A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14432, None, "ANATOLIAN HIEROGLYPH A046", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14433, None, "ANATOLIAN HIEROGLYPH A046A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14434, None, "ANATOLIAN HIEROGLYPH A046B", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14435, None, "ANATOLIAN HIEROGLYPH A047", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14436, None, "ANATOLIAN HIEROGLYPH A048", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14437, None, "ANATOLIAN HIEROGLYPH A049", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14438, None, "ANATOLIAN HIEROGLYPH A050", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14439, None, "ANATOLIAN HIEROGLYPH A051", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1443A, None, "ANATOLIAN HIEROGLYPH A052", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1443B, None, "ANATOLIAN HIEROGLYPH A053", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1443C, None, "ANATOLIAN HIEROGLYPH A054", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1443D, None, "ANATOLIAN HIEROGLYPH A055", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1443E, None, "ANATOLIAN HIEROGLYPH A056", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1443F, None, "ANATOLIAN HIEROGLYPH A057", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14440, None, "ANATOLIAN HIEROGLYPH A058", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14441, None, "ANATOLIAN HIEROGLYPH A059", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14442, None, "ANATOLIAN HIEROGLYPH A060", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14443, None, "ANATOLIAN HIEROGLYPH A061", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14444, None, "ANATOLIAN HIEROGLYPH A062", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14445, None, "ANATOLIAN HIEROGLYPH A063", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14446, None, "ANATOLIAN HIEROGLYPH A064", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14447, None, "ANATOLIAN HIEROGLYPH A065", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14448, None, "ANATOLIAN HIEROGLYPH A066", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14449, None, "ANATOLIAN HIEROGLYPH A066A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1444A, None, "ANATOLIAN HIEROGLYPH A066B", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1444B, None, "ANATOLIAN HIEROGLYPH A066C", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1444C, None, "ANATOLIAN HIEROGLYPH A067", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1444D, None, "ANATOLIAN HIEROGLYPH A068", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1444E, None, "ANATOLIAN HIEROGLYPH A069", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1444F, None, "ANATOLIAN HIEROGLYPH A070", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14450, None, "ANATOLIAN HIEROGLYPH A071", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14451, None, "ANATOLIAN HIEROGLYPH A072", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14452, None, "ANATOLIAN HIEROGLYPH A073", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14453, None, "ANATOLIAN HIEROGLYPH A074", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14454, None, "ANATOLIAN HIEROGLYPH A075", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14455, None, "ANATOLIAN HIEROGLYPH A076", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14456, None, "ANATOLIAN HIEROGLYPH A077", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14457, None, "ANATOLIAN HIEROGLYPH A078", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14458, None, "ANATOLIAN HIEROGLYPH A079", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14459, None, "ANATOLIAN HIEROGLYPH A080", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1445A, None, "ANATOLIAN HIEROGLYPH A081", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1445B, None, "ANATOLIAN HIEROGLYPH A082", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1445C, None, "ANATOLIAN HIEROGLYPH A083", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1445D, None, "ANATOLIAN HIEROGLYPH A084", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1445E, None, "ANATOLIAN HIEROGLYPH A085", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1445F, None, "ANATOLIAN HIEROGLYPH A086", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14460, None, "ANATOLIAN HIEROGLYPH A087", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14461, None, "ANATOLIAN HIEROGLYPH A088", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14462, None, "ANATOLIAN HIEROGLYPH A089", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14463, None, "ANATOLIAN HIEROGLYPH A090", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14464, None, "ANATOLIAN HIEROGLYPH A091", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14465, None, "ANATOLIAN HIEROGLYPH A092", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14466, None, "ANATOLIAN HIEROGLYPH A093", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14467, None, "ANATOLIAN HIEROGLYPH A094", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14468, None, "ANATOLIAN HIEROGLYPH A095", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14469, None, "ANATOLIAN HIEROGLYPH A096", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1446A, None, "ANATOLIAN HIEROGLYPH A097", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1446B, None, "ANATOLIAN HIEROGLYPH A097A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1446C, None, "ANATOLIAN HIEROGLYPH A098", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1446D, None, "ANATOLIAN HIEROGLYPH A098A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1446E, None, "ANATOLIAN HIEROGLYPH A099", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1446F, None, "ANATOLIAN HIEROGLYPH A100", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14470, None, "ANATOLIAN HIEROGLYPH A100A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14471, None, "ANATOLIAN HIEROGLYPH A101", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14472, None, "ANATOLIAN HIEROGLYPH A101A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14473, None, "ANATOLIAN HIEROGLYPH A102", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14474, None, "ANATOLIAN HIEROGLYPH A102A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14475, None, "ANATOLIAN HIEROGLYPH A103", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14476, None, "ANATOLIAN HIEROGLYPH A104", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14477, None, "ANATOLIAN HIEROGLYPH A104A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14478, None, "ANATOLIAN HIEROGLYPH A104B", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14479, None, "ANATOLIAN HIEROGLYPH A104C", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1447A, None, "ANATOLIAN HIEROGLYPH A105", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1447B, None, "ANATOLIAN HIEROGLYPH A105A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1447C, None, "ANATOLIAN HIEROGLYPH A105B", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1447D, None, "ANATOLIAN HIEROGLYPH A106", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1447E, None, "ANATOLIAN HIEROGLYPH A107", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1447F, None, "ANATOLIAN HIEROGLYPH A107A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14480, None, "ANATOLIAN HIEROGLYPH A107B", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14481, None, "ANATOLIAN HIEROGLYPH A107C", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14482, None, "ANATOLIAN HIEROGLYPH A108", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14483, None, "ANATOLIAN HIEROGLYPH A109", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14484, None, "ANATOLIAN HIEROGLYPH A110", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14485, None, "ANATOLIAN HIEROGLYPH A110A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14486, None, "ANATOLIAN HIEROGLYPH A110B", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14487, None, "ANATOLIAN HIEROGLYPH A111", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14488, None, "ANATOLIAN HIEROGLYPH A112", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14489, None, "ANATOLIAN HIEROGLYPH A113", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1448A, None, "ANATOLIAN HIEROGLYPH A114", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1448B, None, "ANATOLIAN HIEROGLYPH A115", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1448C, None, "ANATOLIAN HIEROGLYPH A115A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1448D, None, "ANATOLIAN HIEROGLYPH A116", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1448E, None, "ANATOLIAN HIEROGLYPH A117", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1448F, None, "ANATOLIAN HIEROGLYPH A118", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14490, None, "ANATOLIAN HIEROGLYPH A119", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14491, None, "ANATOLIAN HIEROGLYPH A120", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14492, None, "ANATOLIAN HIEROGLYPH A121", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14493, None, "ANATOLIAN HIEROGLYPH A122", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14494, None, "ANATOLIAN HIEROGLYPH A123", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14495, None, "ANATOLIAN HIEROGLYPH A124", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14496, None, "ANATOLIAN HIEROGLYPH A125", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14497, None, "ANATOLIAN HIEROGLYPH A125A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14498, None, "ANATOLIAN HIEROGLYPH A126", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14499, None, "ANATOLIAN HIEROGLYPH A127", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1449A, None, "ANATOLIAN HIEROGLYPH A128", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1449B, None, "ANATOLIAN HIEROGLYPH A129", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1449C, None, "ANATOLIAN HIEROGLYPH A130", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1449D, None, "ANATOLIAN HIEROGLYPH A131", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1449E, None, "ANATOLIAN HIEROGLYPH A132", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1449F, None, "ANATOLIAN HIEROGLYPH A133", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144A0, None, "ANATOLIAN HIEROGLYPH A134", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144A1, None, "ANATOLIAN HIEROGLYPH A135", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144A2, None, "ANATOLIAN HIEROGLYPH A135A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144A3, None, "ANATOLIAN HIEROGLYPH A136", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144A4, None, "ANATOLIAN HIEROGLYPH A137", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144A5, None, "ANATOLIAN HIEROGLYPH A138", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144A6, None, "ANATOLIAN HIEROGLYPH A139", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144A7, None, "ANATOLIAN HIEROGLYPH A140", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144A8, None, "ANATOLIAN HIEROGLYPH A141", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144A9, None, "ANATOLIAN HIEROGLYPH A142", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144AA, None, "ANATOLIAN HIEROGLYPH A143", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144AB, None, "ANATOLIAN HIEROGLYPH A144", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144AC, None, "ANATOLIAN HIEROGLYPH A145", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144AD, None, "ANATOLIAN HIEROGLYPH A146", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144AE, None, "ANATOLIAN HIEROGLYPH A147", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144AF, None, "ANATOLIAN HIEROGLYPH A148", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144B0, None, "ANATOLIAN HIEROGLYPH A149", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144B1, None, "ANATOLIAN HIEROGLYPH A150", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144B2, None, "ANATOLIAN HIEROGLYPH A151", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144B3, None, "ANATOLIAN HIEROGLYPH A152", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144B4, None, "ANATOLIAN HIEROGLYPH A153", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144B5, None, "ANATOLIAN HIEROGLYPH A154", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144B6, None, "ANATOLIAN HIEROGLYPH A155", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144B7, None, "ANATOLIAN HIEROGLYPH A156", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144B8, None, "ANATOLIAN HIEROGLYPH A157", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144B9, None, "ANATOLIAN HIEROGLYPH A158", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144BA, None, "ANATOLIAN HIEROGLYPH A159", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144BB, None, "ANATOLIAN HIEROGLYPH A160", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144BC, None, "ANATOLIAN HIEROGLYPH A161", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144BD, None, "ANATOLIAN HIEROGLYPH A162", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144BE, None, "ANATOLIAN HIEROGLYPH A163", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144BF, None, "ANATOLIAN HIEROGLYPH A164", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144C0, None, "ANATOLIAN HIEROGLYPH A165", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144C1, None, "ANATOLIAN HIEROGLYPH A166", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144C2, None, "ANATOLIAN HIEROGLYPH A167", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144C3, None, "ANATOLIAN HIEROGLYPH A168", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144C4, None, "ANATOLIAN HIEROGLYPH A169", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144C5, None, "ANATOLIAN HIEROGLYPH A170", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144C6, None, "ANATOLIAN HIEROGLYPH A171", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144C7, None, "ANATOLIAN HIEROGLYPH A172", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144C8, None, "ANATOLIAN HIEROGLYPH A173", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144C9, None, "ANATOLIAN HIEROGLYPH A174", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144CA, None, "ANATOLIAN HIEROGLYPH A175", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144CB, None, "ANATOLIAN HIEROGLYPH A176", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144CC, None, "ANATOLIAN HIEROGLYPH A177", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144CD, None, "ANATOLIAN HIEROGLYPH A178", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144CE, None, "ANATOLIAN HIEROGLYPH A179", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144CF, None, "ANATOLIAN HIEROGLYPH A180", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144D0, None, "ANATOLIAN HIEROGLYPH A181", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144D1, None, "ANATOLIAN HIEROGLYPH A182", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144D2, None, "ANATOLIAN HIEROGLYPH A183", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144D3, None, "ANATOLIAN HIEROGLYPH A184", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144D4, None, "ANATOLIAN HIEROGLYPH A185", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144D5, None, "ANATOLIAN HIEROGLYPH A186", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144D6, None, "ANATOLIAN HIEROGLYPH A187", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144D7, None, "ANATOLIAN HIEROGLYPH A188", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144D8, None, "ANATOLIAN HIEROGLYPH A189", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144D9, None, "ANATOLIAN HIEROGLYPH A190", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144DA, None, "ANATOLIAN HIEROGLYPH A191", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144DB, None, "ANATOLIAN HIEROGLYPH A192", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144DC, None, "ANATOLIAN HIEROGLYPH A193", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144DD, None, "ANATOLIAN HIEROGLYPH A194", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144DE, None, "ANATOLIAN HIEROGLYPH A195", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144DF, None, "ANATOLIAN HIEROGLYPH A196", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144E0, None, "ANATOLIAN HIEROGLYPH A197", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144E1, None, "ANATOLIAN HIEROGLYPH A198", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144E2, None, "ANATOLIAN HIEROGLYPH A199", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144E3, None, "ANATOLIAN HIEROGLYPH A200", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144E4, None, "ANATOLIAN HIEROGLYPH A201", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144E5, None, "ANATOLIAN HIEROGLYPH A202", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144E6, None, "ANATOLIAN HIEROGLYPH A202A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144E7, None, "ANATOLIAN HIEROGLYPH A202B", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144E8, None, "ANATOLIAN HIEROGLYPH A203", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144E9, None, "ANATOLIAN HIEROGLYPH A204", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144EA, None, "ANATOLIAN HIEROGLYPH A205", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144EB, None, "ANATOLIAN HIEROGLYPH A206", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144EC, None, "ANATOLIAN HIEROGLYPH A207", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144ED, None, "ANATOLIAN HIEROGLYPH A207A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144EE, None, "ANATOLIAN HIEROGLYPH A208", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144EF, None, "ANATOLIAN HIEROGLYPH A209", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144F0, None, "ANATOLIAN HIEROGLYPH A209A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144F1, None, "ANATOLIAN HIEROGLYPH A210", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144F2, None, "ANATOLIAN HIEROGLYPH A211", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144F3, None, "ANATOLIAN HIEROGLYPH A212", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144F4, None, "ANATOLIAN HIEROGLYPH A213", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144F5, None, "ANATOLIAN HIEROGLYPH A214", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144F6, None, "ANATOLIAN HIEROGLYPH A215", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144F7, None, "ANATOLIAN HIEROGLYPH A215A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144F8, None, "ANATOLIAN HIEROGLYPH A216", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144F9, None, "ANATOLIAN HIEROGLYPH A216A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144FA, None, "ANATOLIAN HIEROGLYPH A217", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144FB, None, "ANATOLIAN HIEROGLYPH A218", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144FC, None, "ANATOLIAN HIEROGLYPH A219", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144FD, None, "ANATOLIAN HIEROGLYPH A220", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144FE, None, "ANATOLIAN HIEROGLYPH A221", 0x31, "Anatolian_Hieroglyphs"),
    c(0x144FF, None, "ANATOLIAN HIEROGLYPH A222", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14500, None, "ANATOLIAN HIEROGLYPH A223", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14501, None, "ANATOLIAN HIEROGLYPH A224", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14502, None, "ANATOLIAN HIEROGLYPH A225", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14503, None, "ANATOLIAN HIEROGLYPH A226", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14504, None, "ANATOLIAN HIEROGLYPH A227", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14505, None, "ANATOLIAN HIEROGLYPH A227A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14506, None, "ANATOLIAN HIEROGLYPH A228", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14507, None, "ANATOLIAN HIEROGLYPH A229", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14508, None, "ANATOLIAN HIEROGLYPH A230", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14509, None, "ANATOLIAN HIEROGLYPH A231", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1450A, None, "ANATOLIAN HIEROGLYPH A232", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1450B, None, "ANATOLIAN HIEROGLYPH A233", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1450C, None, "ANATOLIAN HIEROGLYPH A234", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1450D, None, "ANATOLIAN HIEROGLYPH A235", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1450E, None, "ANATOLIAN HIEROGLYPH A236", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1450F, None, "ANATOLIAN HIEROGLYPH A237", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14510, None, "ANATOLIAN HIEROGLYPH A238", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14511, None, "ANATOLIAN HIEROGLYPH A239", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14512, None, "ANATOLIAN HIEROGLYPH A240", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14513, None, "ANATOLIAN HIEROGLYPH A241", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14514, None, "ANATOLIAN HIEROGLYPH A242", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14515, None, "ANATOLIAN HIEROGLYPH A243", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14516, None, "ANATOLIAN HIEROGLYPH A244", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14517, None, "ANATOLIAN HIEROGLYPH A245", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14518, None, "ANATOLIAN HIEROGLYPH A246", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14519, None, "ANATOLIAN HIEROGLYPH A247", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1451A, None, "ANATOLIAN HIEROGLYPH A248", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1451B, None, "ANATOLIAN HIEROGLYPH A249", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1451C, None, "ANATOLIAN HIEROGLYPH A250", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1451D, None, "ANATOLIAN HIEROGLYPH A251", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1451E, None, "ANATOLIAN HIEROGLYPH A252", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1451F, None, "ANATOLIAN HIEROGLYPH A253", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14520, None, "ANATOLIAN HIEROGLYPH A254", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14521, None, "ANATOLIAN HIEROGLYPH A255", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14522, None, "ANATOLIAN HIEROGLYPH A256", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14523, None, "ANATOLIAN HIEROGLYPH A257", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14524, None, "ANATOLIAN HIEROGLYPH A258", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14525, None, "ANATOLIAN HIEROGLYPH A259", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14526, None, "ANATOLIAN HIEROGLYPH A260", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14527, None, "ANATOLIAN HIEROGLYPH A261", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14528, None, "ANATOLIAN HIEROGLYPH A262", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14529, None, "ANATOLIAN HIEROGLYPH A263", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1452A, None, "ANATOLIAN HIEROGLYPH A264", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1452B, None, "ANATOLIAN HIEROGLYPH A265", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1452C, None, "ANATOLIAN HIEROGLYPH A266", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1452D, None, "ANATOLIAN HIEROGLYPH A267", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1452E, None, "ANATOLIAN HIEROGLYPH A267A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1452F, None, "ANATOLIAN HIEROGLYPH A268", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14530, None, "ANATOLIAN HIEROGLYPH A269", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14531, None, "ANATOLIAN HIEROGLYPH A270", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14532, None, "ANATOLIAN HIEROGLYPH A271", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14533, None, "ANATOLIAN HIEROGLYPH A272", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14534, None, "ANATOLIAN HIEROGLYPH A273", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14535, None, "ANATOLIAN HIEROGLYPH A274", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14536, None, "ANATOLIAN HIEROGLYPH A275", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14537, None, "ANATOLIAN HIEROGLYPH A276", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14538, None, "ANATOLIAN HIEROGLYPH A277", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14539, None, "ANATOLIAN HIEROGLYPH A278", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1453A, None, "ANATOLIAN HIEROGLYPH A279", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1453B, None, "ANATOLIAN HIEROGLYPH A280", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1453C, None, "ANATOLIAN HIEROGLYPH A281", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1453D, None, "ANATOLIAN HIEROGLYPH A282", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1453E, None, "ANATOLIAN HIEROGLYPH A283", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1453F, None, "ANATOLIAN HIEROGLYPH A284", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14540, None, "ANATOLIAN HIEROGLYPH A285", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14541, None, "ANATOLIAN HIEROGLYPH A286", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14542, None, "ANATOLIAN HIEROGLYPH A287", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14543, None, "ANATOLIAN HIEROGLYPH A288", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14544, None, "ANATOLIAN HIEROGLYPH A289", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14545, None, "ANATOLIAN HIEROGLYPH A289A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14546, None, "ANATOLIAN HIEROGLYPH A290", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14547, None, "ANATOLIAN HIEROGLYPH A291", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14548, None, "ANATOLIAN HIEROGLYPH A292", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14549, None, "ANATOLIAN HIEROGLYPH A293", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1454A, None, "ANATOLIAN HIEROGLYPH A294", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1454B, None, "ANATOLIAN HIEROGLYPH A294A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1454C, None, "ANATOLIAN HIEROGLYPH A295", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1454D, None, "ANATOLIAN HIEROGLYPH A296", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1454E, None, "ANATOLIAN HIEROGLYPH A297", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1454F, None, "ANATOLIAN HIEROGLYPH A298", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14550, None, "ANATOLIAN HIEROGLYPH A299", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14551, None, "ANATOLIAN HIEROGLYPH A299A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14552, None, "ANATOLIAN HIEROGLYPH A300", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14553, None, "ANATOLIAN HIEROGLYPH A301", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14554, None, "ANATOLIAN HIEROGLYPH A302", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14555, None, "ANATOLIAN HIEROGLYPH A303", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14556, None, "ANATOLIAN HIEROGLYPH A304", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14557, None, "ANATOLIAN HIEROGLYPH A305", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14558, None, "ANATOLIAN HIEROGLYPH A306", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14559, None, "ANATOLIAN HIEROGLYPH A307", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1455A, None, "ANATOLIAN HIEROGLYPH A308", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1455B, None, "ANATOLIAN HIEROGLYPH A309", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1455C, None, "ANATOLIAN HIEROGLYPH A309A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1455D, None, "ANATOLIAN HIEROGLYPH A310", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1455E, None, "ANATOLIAN HIEROGLYPH A311", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1455F, None, "ANATOLIAN HIEROGLYPH A312", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14560, None, "ANATOLIAN HIEROGLYPH A313", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14561, None, "ANATOLIAN HIEROGLYPH A314", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14562, None, "ANATOLIAN HIEROGLYPH A315", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14563, None, "ANATOLIAN HIEROGLYPH A316", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14564, None, "ANATOLIAN HIEROGLYPH A317", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14565, None, "ANATOLIAN HIEROGLYPH A318", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14566, None, "ANATOLIAN HIEROGLYPH A319", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14567, None, "ANATOLIAN HIEROGLYPH A320", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14568, None, "ANATOLIAN HIEROGLYPH A321", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14569, None, "ANATOLIAN HIEROGLYPH A322", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1456A, None, "ANATOLIAN HIEROGLYPH A323", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1456B, None, "ANATOLIAN HIEROGLYPH A324", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1456C, None, "ANATOLIAN HIEROGLYPH A325", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1456D, None, "ANATOLIAN HIEROGLYPH A326", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1456E, None, "ANATOLIAN HIEROGLYPH A327", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1456F, None, "ANATOLIAN HIEROGLYPH A328", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14570, None, "ANATOLIAN HIEROGLYPH A329", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14571, None, "ANATOLIAN HIEROGLYPH A329A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14572, None, "ANATOLIAN HIEROGLYPH A330", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14573, None, "ANATOLIAN HIEROGLYPH A331", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14574, None, "ANATOLIAN HIEROGLYPH A332A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14575, None, "ANATOLIAN HIEROGLYPH A332B", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14576, None, "ANATOLIAN HIEROGLYPH A332C", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14577, None, "ANATOLIAN HIEROGLYPH A333", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14578, None, "ANATOLIAN HIEROGLYPH A334", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14579, None, "ANATOLIAN HIEROGLYPH A335", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1457A, None, "ANATOLIAN HIEROGLYPH A336", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1457B, None, "ANATOLIAN HIEROGLYPH A336A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1457C, None, "ANATOLIAN HIEROGLYPH A336B", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1457D, None, "ANATOLIAN HIEROGLYPH A336C", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1457E, None, "ANATOLIAN HIEROGLYPH A337", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1457F, None, "ANATOLIAN HIEROGLYPH A338", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14580, None, "ANATOLIAN HIEROGLYPH A339", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14581, None, "ANATOLIAN HIEROGLYPH A340", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14582, None, "ANATOLIAN HIEROGLYPH A341", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14583, None, "ANATOLIAN HIEROGLYPH A342", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14584, None, "ANATOLIAN HIEROGLYPH A343", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14585, None, "ANATOLIAN HIEROGLYPH A344", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14586, None, "ANATOLIAN HIEROGLYPH A345", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14587, None, "ANATOLIAN HIEROGLYPH A346", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14588, None, "ANATOLIAN HIEROGLYPH A347", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14589, None, "ANATOLIAN HIEROGLYPH A348", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1458A, None, "ANATOLIAN HIEROGLYPH A349", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1458B, None, "ANATOLIAN HIEROGLYPH A350", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1458C, None, "ANATOLIAN HIEROGLYPH A351", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1458D, None, "ANATOLIAN HIEROGLYPH A352", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1458E, None, "ANATOLIAN HIEROGLYPH A353", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1458F, None, "ANATOLIAN HIEROGLYPH A354", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14590, None, "ANATOLIAN HIEROGLYPH A355", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14591, None, "ANATOLIAN HIEROGLYPH A356", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14592, None, "ANATOLIAN HIEROGLYPH A357", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14593, None, "ANATOLIAN HIEROGLYPH A358", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14594, None, "ANATOLIAN HIEROGLYPH A359", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14595, None, "ANATOLIAN HIEROGLYPH A359A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14596, None, "ANATOLIAN HIEROGLYPH A360", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14597, None, "ANATOLIAN HIEROGLYPH A361", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14598, None, "ANATOLIAN HIEROGLYPH A362", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14599, None, "ANATOLIAN HIEROGLYPH A363", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1459A, None, "ANATOLIAN HIEROGLYPH A364", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1459B, None, "ANATOLIAN HIEROGLYPH A364A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1459C, None, "ANATOLIAN HIEROGLYPH A365", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1459D, None, "ANATOLIAN HIEROGLYPH A366", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1459E, None, "ANATOLIAN HIEROGLYPH A367", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1459F, None, "ANATOLIAN HIEROGLYPH A368", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145A0, None, "ANATOLIAN HIEROGLYPH A368A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145A1, None, "ANATOLIAN HIEROGLYPH A369", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145A2, None, "ANATOLIAN HIEROGLYPH A370", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145A3, None, "ANATOLIAN HIEROGLYPH A371", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145A4, None, "ANATOLIAN HIEROGLYPH A371A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145A5, None, "ANATOLIAN HIEROGLYPH A372", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145A6, None, "ANATOLIAN HIEROGLYPH A373", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145A7, None, "ANATOLIAN HIEROGLYPH A374", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145A8, None, "ANATOLIAN HIEROGLYPH A375", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145A9, None, "ANATOLIAN HIEROGLYPH A376", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145AA, None, "ANATOLIAN HIEROGLYPH A377", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145AB, None, "ANATOLIAN HIEROGLYPH A378", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145AC, None, "ANATOLIAN HIEROGLYPH A379", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145AD, None, "ANATOLIAN HIEROGLYPH A380", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145AE, None, "ANATOLIAN HIEROGLYPH A381", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145AF, None, "ANATOLIAN HIEROGLYPH A381A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145B0, None, "ANATOLIAN HIEROGLYPH A382", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145B1, None, "ANATOLIAN HIEROGLYPH A383 RA OR RI", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145B2, None, "ANATOLIAN HIEROGLYPH A383A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145B3, None, "ANATOLIAN HIEROGLYPH A384", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145B4, None, "ANATOLIAN HIEROGLYPH A385", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145B5, None, "ANATOLIAN HIEROGLYPH A386", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145B6, None, "ANATOLIAN HIEROGLYPH A386A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145B7, None, "ANATOLIAN HIEROGLYPH A387", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145B8, None, "ANATOLIAN HIEROGLYPH A388", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145B9, None, "ANATOLIAN HIEROGLYPH A389", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145BA, None, "ANATOLIAN HIEROGLYPH A390", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145BB, None, "ANATOLIAN HIEROGLYPH A391", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145BC, None, "ANATOLIAN HIEROGLYPH A392", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145BD, None, "ANATOLIAN HIEROGLYPH A393 EIGHT", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145BE, None, "ANATOLIAN HIEROGLYPH A394", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145BF, None, "ANATOLIAN HIEROGLYPH A395", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145C0, None, "ANATOLIAN HIEROGLYPH A396", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145C1, None, "ANATOLIAN HIEROGLYPH A397", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145C2, None, "ANATOLIAN HIEROGLYPH A398", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145C3, None, "ANATOLIAN HIEROGLYPH A399", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145C4, None, "ANATOLIAN HIEROGLYPH A400", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145C5, None, "ANATOLIAN HIEROGLYPH A401", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145C6, None, "ANATOLIAN HIEROGLYPH A402", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145C7, None, "ANATOLIAN HIEROGLYPH A403", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145C8, None, "ANATOLIAN HIEROGLYPH A404", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145C9, None, "ANATOLIAN HIEROGLYPH A405", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145CA, None, "ANATOLIAN HIEROGLYPH A406", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145CB, None, "ANATOLIAN HIEROGLYPH A407", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145CC, None, "ANATOLIAN HIEROGLYPH A408", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145CD, None, "ANATOLIAN HIEROGLYPH A409", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145CE, None, "ANATOLIAN HIEROGLYPH A410 BEGIN LOGOGRAM MARK", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145CF, None, "ANATOLIAN HIEROGLYPH A410A END LOGOGRAM MARK", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145D0, None, "ANATOLIAN HIEROGLYPH A411", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145D1, None, "ANATOLIAN HIEROGLYPH A412", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145D2, None, "ANATOLIAN HIEROGLYPH A413", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145D3, None, "ANATOLIAN HIEROGLYPH A414", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145D4, None, "ANATOLIAN HIEROGLYPH A415", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145D5, None, "ANATOLIAN HIEROGLYPH A416", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145D6, None, "ANATOLIAN HIEROGLYPH A417", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145D7, None, "ANATOLIAN HIEROGLYPH A418", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145D8, None, "ANATOLIAN HIEROGLYPH A419", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145D9, None, "ANATOLIAN HIEROGLYPH A420", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145DA, None, "ANATOLIAN HIEROGLYPH A421", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145DB, None, "ANATOLIAN HIEROGLYPH A422", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145DC, None, "ANATOLIAN HIEROGLYPH A423", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145DD, None, "ANATOLIAN HIEROGLYPH A424", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145DE, None, "ANATOLIAN HIEROGLYPH A425", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145DF, None, "ANATOLIAN HIEROGLYPH A426", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145E0, None, "ANATOLIAN HIEROGLYPH A427", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145E1, None, "ANATOLIAN HIEROGLYPH A428", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145E2, None, "ANATOLIAN HIEROGLYPH A429", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145E3, None, "ANATOLIAN HIEROGLYPH A430", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145E4, None, "ANATOLIAN HIEROGLYPH A431", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145E5, None, "ANATOLIAN HIEROGLYPH A432", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145E6, None, "ANATOLIAN HIEROGLYPH A433", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145E7, None, "ANATOLIAN HIEROGLYPH A434", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145E8, None, "ANATOLIAN HIEROGLYPH A435", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145E9, None, "ANATOLIAN HIEROGLYPH A436", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145EA, None, "ANATOLIAN HIEROGLYPH A437", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145EB, None, "ANATOLIAN HIEROGLYPH A438", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145EC, None, "ANATOLIAN HIEROGLYPH A439", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145ED, None, "ANATOLIAN HIEROGLYPH A440", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145EE, None, "ANATOLIAN HIEROGLYPH A441", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145EF, None, "ANATOLIAN HIEROGLYPH A442", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145F0, None, "ANATOLIAN HIEROGLYPH A443", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145F1, None, "ANATOLIAN HIEROGLYPH A444", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145F2, None, "ANATOLIAN HIEROGLYPH A445", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145F3, None, "ANATOLIAN HIEROGLYPH A446", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145F4, None, "ANATOLIAN HIEROGLYPH A447", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145F5, None, "ANATOLIAN HIEROGLYPH A448", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145F6, None, "ANATOLIAN HIEROGLYPH A449", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145F7, None, "ANATOLIAN HIEROGLYPH A450", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145F8, None, "ANATOLIAN HIEROGLYPH A450A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145F9, None, "ANATOLIAN HIEROGLYPH A451", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145FA, None, "ANATOLIAN HIEROGLYPH A452", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145FB, None, "ANATOLIAN HIEROGLYPH A453", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145FC, None, "ANATOLIAN HIEROGLYPH A454", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145FD, None, "ANATOLIAN HIEROGLYPH A455", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145FE, None, "ANATOLIAN HIEROGLYPH A456", 0x31, "Anatolian_Hieroglyphs"),
    c(0x145FF, None, "ANATOLIAN HIEROGLYPH A457", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14600, None, "ANATOLIAN HIEROGLYPH A457A", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14601, None, "ANATOLIAN HIEROGLYPH A458", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14602, None, "ANATOLIAN HIEROGLYPH A459", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14603, None, "ANATOLIAN HIEROGLYPH A460", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14604, None, "ANATOLIAN HIEROGLYPH A461", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14605, None, "ANATOLIAN HIEROGLYPH A462", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14606, None, "ANATOLIAN HIEROGLYPH A463", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14607, None, "ANATOLIAN HIEROGLYPH A464", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14608, None, "ANATOLIAN HIEROGLYPH A465", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14609, None, "ANATOLIAN HIEROGLYPH A466", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1460A, None, "ANATOLIAN HIEROGLYPH A467", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1460B, None, "ANATOLIAN HIEROGLYPH A468", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1460C, None, "ANATOLIAN HIEROGLYPH A469", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1460D, None, "ANATOLIAN HIEROGLYPH A470", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1460E, None, "ANATOLIAN HIEROGLYPH A471", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1460F, None, "ANATOLIAN HIEROGLYPH A472", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14610, None, "ANATOLIAN HIEROGLYPH A473", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14611, None, "ANATOLIAN HIEROGLYPH A474", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14612, None, "ANATOLIAN HIEROGLYPH A475", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14613, None, "ANATOLIAN HIEROGLYPH A476", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14614, None, "ANATOLIAN HIEROGLYPH A477", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14615, None, "ANATOLIAN HIEROGLYPH A478", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14616, None, "ANATOLIAN HIEROGLYPH A479", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14617, None, "ANATOLIAN HIEROGLYPH A480", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14618, None, "ANATOLIAN HIEROGLYPH A481", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14619, None, "ANATOLIAN HIEROGLYPH A482", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1461A, None, "ANATOLIAN HIEROGLYPH A483", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1461B, None, "ANATOLIAN HIEROGLYPH A484", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1461C, None, "ANATOLIAN HIEROGLYPH A485", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1461D, None, "ANATOLIAN HIEROGLYPH A486", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1461E, None, "ANATOLIAN HIEROGLYPH A487", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1461F, None, "ANATOLIAN HIEROGLYPH A488", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14620, None, "ANATOLIAN HIEROGLYPH A489", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14621, None, "ANATOLIAN HIEROGLYPH A490", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14622, None, "ANATOLIAN HIEROGLYPH A491", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14623, None, "ANATOLIAN HIEROGLYPH A492", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14624, None, "ANATOLIAN HIEROGLYPH A493", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14625, None, "ANATOLIAN HIEROGLYPH A494", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14626, None, "ANATOLIAN HIEROGLYPH A495", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14627, None, "ANATOLIAN HIEROGLYPH A496", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14628, None, "ANATOLIAN HIEROGLYPH A497", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14629, None, "ANATOLIAN HIEROGLYPH A501", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1462A, None, "ANATOLIAN HIEROGLYPH A502", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1462B, None, "ANATOLIAN HIEROGLYPH A503", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1462C, None, "ANATOLIAN HIEROGLYPH A504", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1462D, None, "ANATOLIAN HIEROGLYPH A505", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1462E, None, "ANATOLIAN HIEROGLYPH A506", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1462F, None, "ANATOLIAN HIEROGLYPH A507", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14630, None, "ANATOLIAN HIEROGLYPH A508", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14631, None, "ANATOLIAN HIEROGLYPH A509", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14632, None, "ANATOLIAN HIEROGLYPH A510", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14633, None, "ANATOLIAN HIEROGLYPH A511", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14634, None, "ANATOLIAN HIEROGLYPH A512", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14635, None, "ANATOLIAN HIEROGLYPH A513", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14636, None, "ANATOLIAN HIEROGLYPH A514", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14637, None, "ANATOLIAN HIEROGLYPH A515", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14638, None, "ANATOLIAN HIEROGLYPH A516", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14639, None, "ANATOLIAN HIEROGLYPH A517", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1463A, None, "ANATOLIAN HIEROGLYPH A518", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1463B, None, "ANATOLIAN HIEROGLYPH A519", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1463C, None, "ANATOLIAN HIEROGLYPH A520", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1463D, None, "ANATOLIAN HIEROGLYPH A521", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1463E, None, "ANATOLIAN HIEROGLYPH A522", 0x31, "Anatolian_Hieroglyphs"),
    c(0x1463F, None, "ANATOLIAN HIEROGLYPH A523", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14640, None, "ANATOLIAN HIEROGLYPH A524", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14641, None, "ANATOLIAN HIEROGLYPH A525", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14642, None, "ANATOLIAN HIEROGLYPH A526", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14643, None, "ANATOLIAN HIEROGLYPH A527", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14644, None, "ANATOLIAN HIEROGLYPH A528", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14645, None, "ANATOLIAN HIEROGLYPH A529", 0x31, "Anatolian_Hieroglyphs"),
    c(0x14646, None, "ANATOLIAN HIEROGLYPH A530", 0x31, "Anatolian_Hieroglyphs"),
    c(0x16800, None, "BAMUM LETTER PHASE-A NGKUE MFON", 0x31, "Bamum_Sup"),
    c(0x16801, None, "BAMUM LETTER PHASE-A GBIEE FON", 0x31, "Bamum_Sup"),
    c(0x16802, None, "BAMUM LETTER PHASE-A PON MFON PIPAEMGBIEE", 0x31, "Bamum_Sup"),
    c(0x16803, None, "BAMUM LETTER PHASE-A PON MFON PIPAEMBA", 0x31, "Bamum_Sup"),
    c(0x16804, None, "BAMUM LETTER PHASE-A NAA MFON", 0x31, "Bamum_Sup"),
    c(0x16805, None, "BAMUM LETTER PHASE-A SHUENSHUET", 0x31, "Bamum_Sup"),
    c(0x16806, None, "BAMUM LETTER PHASE-A TITA MFON", 0x31, "Bamum_Sup"),
    c(0x16807, None, "BAMUM LETTER PHASE-A NZA MFON", 0x31, "Bamum_Sup"),
    c(0x16808, None, "BAMUM LETTER PHASE-A SHINDA PA NJI", 0x31, "Bamum_Sup"),
    c(0x16809, None, "BAMUM LETTER PHASE-A PON PA NJI PIPAEMGBIEE", 0x31, "Bamum_Sup"),
    c(0x1680A, None, "BAMUM LETTER PHASE-A PON PA NJI PIPAEMBA", 0x31, "Bamum_Sup"),
    c(0x1680B, None, "BAMUM LETTER PHASE-A MAEMBGBIEE", 0x31, "Bamum_Sup"),
    c(0x1680C, None, "BAMUM LETTER PHASE-A TU MAEMBA", 0x31, "Bamum_Sup"),
    c(0x1680D, None, "BAMUM LETTER PHASE-A NGANGU", 0x31, "Bamum_Sup"),
    c(0x1680E, None, "BAMUM LETTER PHASE-A MAEMVEUX", 0x31, "Bamum_Sup"),
    c(0x1680F, None, "BAMUM LETTER PHASE-A MANSUAE", 0x31, "Bamum_Sup"),
    c(0x16810, None, "BAMUM LETTER PHASE-A MVEUAENGAM", 0x31, "Bamum_Sup"),
    c(0x16811, None, "BAMUM LETTER PHASE-A SEUNYAM", 0x31, "Bamum_Sup"),
    c(0x16812, None, "BAMUM LETTER PHASE-A NTOQPEN", 0x31, "Bamum_Sup"),
    c(0x16813, None, "BAMUM LETTER PHASE-A KEUKEUTNDA", 0x31, "Bamum_Sup"),
    c(0x16814, None, "BAMUM LETTER PHASE-A NKINDI", 0x31, "Bamum_Sup"),
    c(0x16815, None, "BAMUM LETTER PHASE-A SUU", 0x31, "Bamum_Sup"),
    c(0x16816, None, "BAMUM LETTER PHASE-A NGKUENZEUM", 0x31, "Bamum_Sup"),
    c(0x16817, None, "BAMUM LETTER PHASE-A LAPAQ", 0x31, "Bamum_Sup"),
    c(0x16818, None, "BAMUM LETTER PHASE-A LET KUT", 0x31, "Bamum_Sup"),
    c(0x16819, None, "BAMUM LETTER PHASE-A NTAP MFAA", 0x31, "Bamum_Sup"),
    c(0x1681A, None, "BAMUM LETTER PHASE-A MAEKEUP", 0x31, "Bamum_Sup"),
    c(0x1681B, None, "BAMUM LETTER PHASE-A PASHAE", 0x31, "Bamum_Sup"),
    c(0x1681C, None, "BAMUM LETTER PHASE-A GHEUAERAE", 0x31, "Bamum_Sup"),
    c(0x1681D, None, "BAMUM LETTER PHASE-A PAMSHAE", 0x31, "Bamum_Sup"),
    c(0x1681E, None, "BAMUM LETTER PHASE-A MON NGGEUAET", 0x31, "Bamum_Sup"),
    c(0x1681F, None, "BAMUM LETTER PHASE-A NZUN MEUT", 0x31, "Bamum_Sup"),
    c(0x16820, None, "BAMUM LETTER PHASE-A U YUQ NAE", 0x31, "Bamum_Sup"),
    c(0x16821, None, "BAMUM LETTER PHASE-A GHEUAEGHEUAE", 0x31, "Bamum_Sup"),
    c(0x16822, None, "BAMUM LETTER PHASE-A NTAP NTAA", 0x31, "Bamum_Sup"),
    c(0x16823, None, "BAMUM LETTER PHASE-A SISA", 0x31, "Bamum_Sup"),
    c(0x16824, None, "BAMUM LETTER PHASE-A MGBASA", 0x31, "Bamum_Sup"),
    c(0x16825, None, "BAMUM LETTER PHASE-A MEUNJOMNDEUQ", 0x31, "Bamum_Sup"),
    c(0x16826, None, "BAMUM LETTER PHASE-A MOOMPUQ", 0x31, "Bamum_Sup"),
    c(0x16827, None, "BAMUM LETTER PHASE-A KAFA", 0x31, "Bamum_Sup"),
    c(0x16828, None, "BAMUM LETTER PHASE-A PA LEERAEWA", 0x31, "Bamum_Sup"),
    c(0x16829, None, "BAMUM LETTER PHASE-A NDA LEERAEWA", 0x31, "Bamum_Sup"),
    c(0x1682A, None, "BAMUM LETTER PHASE-A PET", 0x31, "Bamum_Sup"),
    c(0x1682B, None, "BAMUM LETTER PHASE-A MAEMKPEN", 0x31, "Bamum_Sup"),
    c(0x1682C, None, "BAMUM LETTER PHASE-A NIKA", 0x31, "Bamum_Sup"),
    c(0x1682D, None, "BAMUM LETTER PHASE-A PUP", 0x31, "Bamum_Sup"),
    c(0x1682E, None, "BAMUM LETTER PHASE-A TUAEP", 0x31, "Bamum_Sup"),
    c(0x1682F, None, "BAMUM LETTER PHASE-A LUAEP", 0x31, "Bamum_Sup"),
    c(0x16830, None, "BAMUM LETTER PHASE-A SONJAM", 0x31, "Bamum_Sup"),
    c(0x16831, None, "BAMUM LETTER PHASE-A TEUTEUWEN", 0x31, "Bamum_Sup"),
    c(0x16832, None, "BAMUM LETTER PHASE-A MAENYI", 0x31, "Bamum_Sup"),
    c(0x16833, None, "BAMUM LETTER PHASE-A KET", 0x31, "Bamum_Sup"),
    c(0x16834, None, "BAMUM LETTER PHASE-A NDAANGGEUAET", 0x31, "Bamum_Sup"),
    c(0x16835, None, "BAMUM LETTER PHASE-A KUOQ", 0x31, "Bamum_Sup"),
    c(0x16836, None, "BAMUM LETTER PHASE-A MOOMEUT", 0x31, "Bamum_Sup"),
    c(0x16837, None, "BAMUM LETTER PHASE-A SHUM", 0x31, "Bamum_Sup"),
    c(0x16838, None, "BAMUM LETTER PHASE-A LOMMAE", 0x31, "Bamum_Sup"),
    c(0x16839, None, "BAMUM LETTER PHASE-A FIRI", 0x31, "Bamum_Sup"),
    c(0x1683A, None, "BAMUM LETTER PHASE-A ROM", 0x31, "Bamum_Sup"),
    c(0x1683B, None, "BAMUM LETTER PHASE-A KPOQ", 0x31, "Bamum_Sup"),
    c(0x1683C, None, "BAMUM LETTER PHASE-A SOQ", 0x31, "Bamum_Sup"),
    c(0x1683D, None, "BAMUM LETTER PHASE-A MAP PIEET", 0x31, "Bamum_Sup"),
    c(0x1683E, None, "BAMUM LETTER PHASE-A SHIRAE", 0x31, "Bamum_Sup"),
    c(0x1683F, None, "BAMUM LETTER PHASE-A NTAP", 0x31, "Bamum_Sup"),
    c(0x16840, None, "BAMUM LETTER PHASE-A SHOQ NSHUT YUM", 0x31, "Bamum_Sup"),
    c(0x16841, None, "BAMUM LETTER PHASE-A NYIT MONGKEUAEQ", 0x31, "Bamum_Sup"),
    c(0x16842, None, "BAMUM LETTER PHASE-A PAARAE", 0x31, "Bamum_Sup"),
    c(0x16843, None, "BAMUM LETTER PHASE-A NKAARAE", 0x31, "Bamum_Sup"),
    c(0x16844, None, "BAMUM LETTER PHASE-A UNKNOWN", 0x31, "Bamum_Sup"),
    c(0x16845, None, "BAMUM LETTER PHASE-A NGGEN", 0x31, "Bamum_Sup"),
    c(0x16846, None, "BAMUM LETTER PHASE-A MAESI", 0x31, "Bamum_Sup"),
    c(0x16847, None, "BAMUM LETTER PHASE-A NJAM", 0x31, "Bamum_Sup"),
    c(0x16848, None, "BAMUM LETTER PHASE-A MBANYI", 0x31, "Bamum_Sup"),
    c(0x16849, None, "BAMUM LETTER PHASE-A NYET", 0x31, "Bamum_Sup"),
    c(0x1684A, None, "BAMUM LETTER PHASE-A TEUAEN", 0x31, "Bamum_Sup"),
    c(0x1684B, None, "BAMUM LETTER PHASE-A SOT", 0x31, "Bamum_Sup"),
    c(0x1684C, None, "BAMUM LETTER PHASE-A PAAM", 0x31, "Bamum_Sup"),
    c(0x1684D, None, "BAMUM LETTER PHASE-A NSHIEE", 0x31, "Bamum_Sup"),
    c(0x1684E, None, "BAMUM LETTER PHASE-A MAEM", 0x31, "Bamum_Sup"),
    c(0x1684F, None, "BAMUM LETTER PHASE-A NYI", 0x31, "Bamum_Sup"),
    c(0x16850, None, "BAMUM LETTER PHASE-A KAQ", 0x31, "Bamum_Sup"),
    c(0x16851, None, "BAMUM LETTER PHASE-A NSHA", 0x31, "Bamum_Sup"),
    c(0x16852, None, "BAMUM LETTER PHASE-A VEE", 0x31, "Bamum_Sup"),
    c(0x16853, None, "BAMUM LETTER PHASE-A LU", 0x31, "Bamum_Sup"),
    c(0x16854, None, "BAMUM LETTER PHASE-A NEN", 0x31, "Bamum_Sup"),
    c(0x16855, None, "BAMUM LETTER PHASE-A NAQ", 0x31, "Bamum_Sup"),
    c(0x16856, None, "BAMUM LETTER PHASE-A MBAQ", 0x31, "Bamum_Sup"),
    c(0x16857, None, "BAMUM LETTER PHASE-B NSHUET", 0x31, "Bamum_Sup"),
    c(0x16858, None, "BAMUM LETTER PHASE-B TU MAEMGBIEE", 0x31, "Bamum_Sup"),
    c(0x16859, None, "BAMUM LETTER PHASE-B SIEE", 0x31, "Bamum_Sup"),
    c(0x1685A, None, "BAMUM LETTER PHASE-B SET TU", 0x31, "Bamum_Sup"),
    c(0x1685B, None, "BAMUM LETTER PHASE-B LOM NTEUM", 0x31, "Bamum_Sup"),
    c(0x1685C, None, "BAMUM LETTER PHASE-B MBA MAELEE", 0x31, "Bamum_Sup"),
    c(0x1685D, None, "BAMUM LETTER PHASE-B KIEEM", 0x31, "Bamum_Sup"),
    c(0x1685E, None, "BAMUM LETTER PHASE-B YEURAE", 0x31, "Bamum_Sup"),
    c(0x1685F, None, "BAMUM LETTER PHASE-B MBAARAE", 0x31, "Bamum_Sup"),
    c(0x16860, None, "BAMUM LETTER PHASE-B KAM", 0x31, "Bamum_Sup"),
    c(0x16861, None, "BAMUM LETTER PHASE-B PEESHI", 0x31, "Bamum_Sup"),
    c(0x16862, None, "BAMUM LETTER PHASE-B YAFU LEERAEWA", 0x31, "Bamum_Sup"),
    c(0x16863, None, "BAMUM LETTER PHASE-B LAM NSHUT NYAM", 0x31, "Bamum_Sup"),
    c(0x16864, None, "BAMUM LETTER PHASE-B NTIEE SHEUOQ", 0x31, "Bamum_Sup"),
    c(0x16865, None, "BAMUM LETTER PHASE-B NDU NJAA", 0x31, "Bamum_Sup"),
    c(0x16866, None, "BAMUM LETTER PHASE-B GHEUGHEUAEM", 0x31, "Bamum_Sup"),
    c(0x16867, None, "BAMUM LETTER PHASE-B PIT", 0x31, "Bamum_Sup"),
    c(0x16868, None, "BAMUM LETTER PHASE-B TU NSIEE", 0x31, "Bamum_Sup"),
    c(0x16869, None, "BAMUM LETTER PHASE-B SHET NJAQ", 0x31, "Bamum_Sup"),
    c(0x1686A, None, "BAMUM LETTER PHASE-B SHEUAEQTU", 0x31, "Bamum_Sup"),
    c(0x1686B, None, "BAMUM LETTER PHASE-B MFON TEUAEQ", 0x31, "Bamum_Sup"),
    c(0x1686C, None, "BAMUM LETTER PHASE-B MBIT MBAAKET", 0x31, "Bamum_Sup"),
    c(0x1686D, None, "BAMUM LETTER PHASE-B NYI NTEUM", 0x31, "Bamum_Sup"),
    c(0x1686E, None, "BAMUM LETTER PHASE-B KEUPUQ", 0x31, "Bamum_Sup"),
    c(0x1686F, None, "BAMUM LETTER PHASE-B GHEUGHEN", 0x31, "Bamum_Sup"),
    c(0x16870, None, "BAMUM LETTER PHASE-B KEUYEUX", 0x31, "Bamum_Sup"),
    c(0x16871, None, "BAMUM LETTER PHASE-B LAANAE", 0x31, "Bamum_Sup"),
    c(0x16872, None, "BAMUM LETTER PHASE-B PARUM", 0x31, "Bamum_Sup"),
    c(0x16873, None, "BAMUM LETTER PHASE-B VEUM", 0x31, "Bamum_Sup"),
    c(0x16874, None, "BAMUM LETTER PHASE-B NGKINDI MVOP", 0x31, "Bamum_Sup"),
    c(0x16875, None, "BAMUM LETTER PHASE-B NGGEU MBU", 0x31, "Bamum_Sup"),
    c(0x16876, None, "BAMUM LETTER PHASE-B WUAET", 0x31, "Bamum_Sup"),
    c(0x16877, None, "BAMUM LETTER PHASE-B SAKEUAE", 0x31, "Bamum_Sup"),
    c(0x16878, None, "BAMUM LETTER PHASE-B TAAM", 0x31, "Bamum_Sup"),
    c(0x16879, None, "BAMUM LETTER PHASE-B MEUQ", 0x31, "Bamum_Sup"),
    c(0x1687A, None, "BAMUM LETTER PHASE-B NGGUOQ", 0x31, "Bamum_Sup"),
    c(0x1687B, None, "BAMUM LETTER PHASE-B NGGUOQ LARGE", 0x31, "Bamum_Sup"),
    c(0x1687C, None, "BAMUM LETTER PHASE-B MFIYAQ", 0x31, "Bamum_Sup"),
    c(0x1687D, None, "BAMUM LETTER PHASE-B SUE", 0x31, "Bamum_Sup"),
    c(0x1687E, None, "BAMUM LETTER PHASE-B MBEURI", 0x31, "Bamum_Sup"),
    c(0x1687F, None, "BAMUM LETTER PHASE-B MONTIEEN", 0x31, "Bamum_Sup"),
    c(0x16880, None, "BAMUM LETTER PHASE-B NYAEMAE", 0x31, "Bamum_Sup"),
    c(0x16881, None, "BAMUM LETTER PHASE-B PUNGAAM", 0x31, "Bamum_Sup"),
    c(0x16882, None, "BAMUM LETTER PHASE-B MEUT NGGEET", 0x31, "Bamum_Sup"),
    c(0x16883, None, "BAMUM LETTER PHASE-B FEUX", 0x31, "Bamum_Sup"),
    c(0x16884, None, "BAMUM LETTER PHASE-B MBUOQ", 0x31, "Bamum_Sup"),
    c(0x16885, None, "BAMUM LETTER PHASE-B FEE", 0x31, "Bamum_Sup"),
    c(0x16886, None, "BAMUM LETTER PHASE-B KEUAEM", 0x31, "Bamum_Sup"),
    c(0x16887, None, "BAMUM LETTER PHASE-B MA NJEUAENA", 0x31, "Bamum_Sup"),
    c(0x16888, None, "BAMUM LETTER PHASE-B MA NJUQA", 0x31, "Bamum_Sup"),
    c(0x16889, None, "BAMUM LETTER PHASE-B LET", 0x31, "Bamum_Sup"),
    c(0x1688A, None, "BAMUM LETTER PHASE-B NGGAAM", 0x31, "Bamum_Sup"),
    c(0x1688B, None, "BAMUM LETTER PHASE-B NSEN", 0x31, "Bamum_Sup"),
    c(0x1688C, None, "BAMUM LETTER PHASE-B MA", 0x31, "Bamum_Sup"),
    c(0x1688D, None, "BAMUM LETTER PHASE-B KIQ", 0x31, "Bamum_Sup"),
    c(0x1688E, None, "BAMUM LETTER PHASE-B NGOM", 0x31, "Bamum_Sup"),
    c(0x1688F, None, "BAMUM LETTER PHASE-C NGKUE MAEMBA", 0x31, "Bamum_Sup"),
    c(0x16890, None, "BAMUM LETTER PHASE-C NZA", 0x31, "Bamum_Sup"),
    c(0x16891, None, "BAMUM LETTER PHASE-C YUM", 0x31, "Bamum_Sup"),
    c(0x16892, None, "BAMUM LETTER PHASE-C WANGKUOQ", 0x31, "Bamum_Sup"),
    c(0x16893, None, "BAMUM LETTER PHASE-C NGGEN", 0x31, "Bamum_Sup"),
    c(0x16894, None, "BAMUM LETTER PHASE-C NDEUAEREE", 0x31, "Bamum_Sup"),
    c(0x16895, None, "BAMUM LETTER PHASE-C NGKAQ", 0x31, "Bamum_Sup"),
    c(0x16896, None, "BAMUM LETTER PHASE-C GHARAE", 0x31, "Bamum_Sup"),
    c(0x16897, None, "BAMUM LETTER PHASE-C MBEEKEET", 0x31, "Bamum_Sup"),
    c(0x16898, None, "BAMUM LETTER PHASE-C GBAYI", 0x31, "Bamum_Sup"),
    c(0x16899, None, "BAMUM LETTER PHASE-C NYIR MKPARAQ MEUN", 0x31, "Bamum_Sup"),
    c(0x1689A, None, "BAMUM LETTER PHASE-C NTU MBIT", 0x31, "Bamum_Sup"),
    c(0x1689B, None, "BAMUM LETTER PHASE-C MBEUM", 0x31, "Bamum_Sup"),
    c(0x1689C, None, "BAMUM LETTER PHASE-C PIRIEEN", 0x31, "Bamum_Sup"),
    c(0x1689D, None, "BAMUM LETTER PHASE-C NDOMBU", 0x31, "Bamum_Sup"),
    c(0x1689E, None, "BAMUM LETTER PHASE-C MBAA CABBAGE-TREE", 0x31, "Bamum_Sup"),
    c(0x1689F, None, "BAMUM LETTER PHASE-C KEUSHEUAEP", 0x31, "Bamum_Sup"),
    c(0x168A0, None, "BAMUM LETTER PHASE-C GHAP", 0x31, "Bamum_Sup"),
    c(0x168A1, None, "BAMUM LETTER PHASE-C KEUKAQ", 0x31, "Bamum_Sup"),
    c(0x168A2, None, "BAMUM LETTER PHASE-C YU MUOMAE", 0x31, "Bamum_Sup"),
    c(0x168A3, None, "BAMUM LETTER PHASE-C NZEUM", 0x31, "Bamum_Sup"),
    c(0x168A4, None, "BAMUM LETTER PHASE-C MBUE", 0x31, "Bamum_Sup"),
    c(0x168A5, None, "BAMUM LETTER PHASE-C NSEUAEN", 0x31, "Bamum_Sup"),
    c(0x168A6, None, "BAMUM LETTER PHASE-C MBIT", 0x31, "Bamum_Sup"),
    c(0x168A7, None, "BAMUM LETTER PHASE-C YEUQ", 0x31, "Bamum_Sup"),
    c(0x168A8, None, "BAMUM LETTER PHASE-C KPARAQ", 0x31, "Bamum_Sup"),
    c(0x168A9, None, "BAMUM LETTER PHASE-C KAA", 0x31, "Bamum_Sup"),
    c(0x168AA, None, "BAMUM LETTER PHASE-C SEUX", 0x31, "Bamum_Sup"),
    c(0x168AB, None, "BAMUM LETTER PHASE-C NDIDA", 0x31, "Bamum_Sup"),
    c(0x168AC, None, "BAMUM LETTER PHASE-C TAASHAE", 0x31, "Bamum_Sup"),
    c(0x168AD, None, "BAMUM LETTER PHASE-C NJUEQ", 0x31, "Bamum_Sup"),
    c(0x168AE, None, "BAMUM LETTER PHASE-C TITA YUE", 0x31, "Bamum_Sup"),
    c(0x168AF, None, "BAMUM LETTER PHASE-C SUAET", 0x31, "Bamum_Sup"),
    c(0x168B0, None, "BAMUM LETTER PHASE-C NGGUAEN NYAM", 0x31, "Bamum_Sup"),
    c(0x168B1, None, "BAMUM LETTER PHASE-C VEUX", 0x31, "Bamum_Sup"),
    c(0x168B2, None, "BAMUM LETTER PHASE-C NANSANAQ", 0x31, "Bamum_Sup"),
    c(0x168B3, None, "BAMUM LETTER PHASE-C MA KEUAERI", 0x31, "Bamum_Sup"),
    c(0x168B4, None, "BAMUM LETTER PHASE-C NTAA", 0x31, "Bamum_Sup"),
    c(0x168B5, None, "BAMUM LETTER PHASE-C NGGUON", 0x31, "Bamum_Sup"),
    c(0x168B6, None, "BAMUM LETTER PHASE-C LAP", 0x31, "Bamum_Sup"),
    c(0x168B7, None, "BAMUM LETTER PHASE-C MBIRIEEN", 0x31, "Bamum_Sup"),
    c(0x168B8, None, "BAMUM LETTER PHASE-C MGBASAQ", 0x31, "Bamum_Sup"),
    c(0x168B9, None, "BAMUM LETTER PHASE-C NTEUNGBA", 0x31, "Bamum_Sup"),
    c(0x168BA, None, "BAMUM LETTER PHASE-C TEUTEUX", 0x31, "Bamum_Sup"),
    c(0x168BB, None, "BAMUM LETTER PHASE-C NGGUM", 0x31, "Bamum_Sup"),
    c(0x168BC, None, "BAMUM LETTER PHASE-C FUE", 0x31, "Bamum_Sup"),
    c(0x168BD, None, "BAMUM LETTER PHASE-C NDEUT", 0x31, "Bamum_Sup"),
    c(0x168BE, None, "BAMUM LETTER PHASE-C NSA", 0x31, "Bamum_Sup"),
    c(0x168BF, None, "BAMUM LETTER PHASE-C NSHAQ", 0x31, "Bamum_Sup"),
    c(0x168C0, None, "BAMUM LETTER PHASE-C BUNG", 0x31, "Bamum_Sup"),
    c(0x168C1, None, "BAMUM LETTER PHASE-C VEUAEPEN", 0x31, "Bamum_Sup"),
    c(0x168C2, None, "BAMUM LETTER PHASE-C MBERAE", 0x31, "Bamum_Sup"),
    c(0x168C3, None, "BAMUM LETTER PHASE-C RU", 0x31, "Bamum_Sup"),
    c(0x168C4, None, "BAMUM LETTER PHASE-C NJAEM", 0x31, "Bamum_Sup"),
    c(0x168C5, None, "BAMUM LETTER PHASE-C LAM", 0x31, "Bamum_Sup"),
    c(0x168C6, None, "BAMUM LETTER PHASE-C TITUAEP", 0x31, "Bamum_Sup"),
    c(0x168C7, None, "BAMUM LETTER PHASE-C NSUOT NGOM", 0x31, "Bamum_Sup"),
    c(0x168C8, None, "BAMUM LETTER PHASE-C NJEEEE", 0x31, "Bamum_Sup"),
    c(0x168C9, None, "BAMUM LETTER PHASE-C KET", 0x31, "Bamum_Sup"),
    c(0x168CA, None, "BAMUM LETTER PHASE-C NGGU", 0x31, "Bamum_Sup"),
    c(0x168CB, None, "BAMUM LETTER PHASE-C MAESI", 0x31, "Bamum_Sup"),
    c(0x168CC, None, "BAMUM LETTER PHASE-C MBUAEM", 0x31, "Bamum_Sup"),
    c(0x168CD, None, "BAMUM LETTER PHASE-C LU", 0x31, "Bamum_Sup"),
    c(0x168CE, None, "BAMUM LETTER PHASE-C KUT", 0x31, "Bamum_Sup"),
    c(0x168CF, None, "BAMUM LETTER PHASE-C NJAM", 0x31, "Bamum_Sup"),
    c(0x168D0, None, "BAMUM LETTER PHASE-C NGOM", 0x31, "Bamum_Sup"),
    c(0x168D1, None, "BAMUM LETTER PHASE-C WUP", 0x31, "Bamum_Sup"),
    c(0x168D2, None, "BAMUM LETTER PHASE-C NGGUEET", 0x31, "Bamum_Sup"),
    c(0x168D3, None, "BAMUM LETTER PHASE-C NSOM", 0x31, "Bamum_Sup"),
    c(0x168D4, None, "BAMUM LETTER PHASE-C NTEN", 0x31, "Bamum_Sup"),
    c(0x168D5, None, "BAMUM LETTER PHASE-C KUOP NKAARAE", 0x31, "Bamum_Sup"),
    c(0x168D6, None, "BAMUM LETTER PHASE-C NSUN", 0x31, "Bamum_Sup"),
    c(0x168D7, None, "BAMUM LETTER PHASE-C NDAM", 0x31, "Bamum_Sup"),
    c(0x168D8, None, "BAMUM LETTER PHASE-C MA NSIEE", 0x31, "Bamum_Sup"),
    c(0x168D9, None, "BAMUM LETTER PHASE-C YAA", 0x31, "Bamum_Sup"),
    c(0x168DA, None, "BAMUM LETTER PHASE-C NDAP", 0x31, "Bamum_Sup"),
    c(0x168DB, None, "BAMUM LETTER PHASE-C SHUEQ", 0x31, "Bamum_Sup"),
    c(0x168DC, None, "BAMUM LETTER PHASE-C SETFON", 0x31, "Bamum_Sup"),
    c(0x168DD, None, "BAMUM LETTER PHASE-C MBI", 0x31, "Bamum_Sup"),
    c(0x168DE, None, "BAMUM LETTER PHASE-C MAEMBA", 0x31, "Bamum_Sup"),
    c(0x168DF, None, "BAMUM LETTER PHASE-C MBANYI", 0x31, "Bamum_Sup"),
    c(0x168E0, None, "BAMUM LETTER PHASE-C KEUSEUX", 0x31, "Bamum_Sup"),
    c(0x168E1, None, "BAMUM LETTER PHASE-C MBEUX", 0x31, "Bamum_Sup"),
    c(0x168E2, None, "BAMUM LETTER PHASE-C KEUM", 0x31, "Bamum_Sup"),
    c(0x168E3, None, "BAMUM LETTER PHASE-C MBAA PICKET", 0x31, "Bamum_Sup"),
    c(0x168E4, None, "BAMUM LETTER PHASE-C YUWOQ", 0x31, "Bamum_Sup"),
    c(0x168E5, None, "BAMUM LETTER PHASE-C NJEUX", 0x31, "Bamum_Sup"),
    c(0x168E6, None, "BAMUM LETTER PHASE-C MIEE", 0x31, "Bamum_Sup"),
    c(0x168E7, None, "BAMUM LETTER PHASE-C MUAE", 0x31, "Bamum_Sup"),
    c(0x168E8, None, "BAMUM LETTER PHASE-C SHIQ", 0x31, "Bamum_Sup"),
    c(0x168E9, None, "BAMUM LETTER PHASE-C KEN LAW", 0x31, "Bamum_Sup"),
    c(0x168EA, None, "BAMUM LETTER PHASE-C KEN FATIGUE", 0x31, "Bamum_Sup"),
    c(0x168EB, None, "BAMUM LETTER PHASE-C NGAQ", 0x31, "Bamum_Sup"),
    c(0x168EC, None, "BAMUM LETTER PHASE-C NAQ", 0x31, "Bamum_Sup"),
    c(0x168ED, None, "BAMUM LETTER PHASE-C LIQ", 0x31, "Bamum_Sup"),
    c(0x168EE, None, "BAMUM LETTER PHASE-C PIN", 0x31, "Bamum_Sup"),
    c(0x168EF, None, "BAMUM LETTER PHASE-C PEN", 0x31, "Bamum_Sup"),
    c(0x168F0, None, "BAMUM LETTER PHASE-C TET", 0x31, "Bamum_Sup"),
    c(0x168F1, None, "BAMUM LETTER PHASE-D MBUO", 0x31, "Bamum_Sup"),
    c(0x168F2, None, "BAMUM LETTER PHASE-D WAP", 0x31, "Bamum_Sup"),
    c(0x168F3, None, "BAMUM LETTER PHASE-D NJI", 0x31, "Bamum_Sup"),
    c(0x168F4, None, "BAMUM LETTER PHASE-D MFON", 0x31, "Bamum_Sup"),
    c(0x168F5, None, "BAMUM LETTER PHASE-D NJIEE", 0x31, "Bamum_Sup"),
    c(0x168F6, None, "BAMUM LETTER PHASE-D LIEE", 0x31, "Bamum_Sup"),
    c(0x168F7, None, "BAMUM LETTER PHASE-D NJEUT", 0x31, "Bamum_Sup"),
    c(0x168F8, None, "BAMUM LETTER PHASE-D NSHEE", 0x31, "Bamum_Sup"),
    c(0x168F9, None, "BAMUM LETTER PHASE-D NGGAAMAE", 0x31, "Bamum_Sup"),
    c(0x168FA, None, "BAMUM LETTER PHASE-D NYAM", 0x31, "Bamum_Sup"),
    c(0x168FB, None, "BAMUM LETTER PHASE-D WUAEN", 0x31, "Bamum_Sup"),
    c(0x168FC, None, "BAMUM LETTER PHASE-D NGKUN", 0x31, "Bamum_Sup"),
    c(0x168FD, None, "BAMUM LETTER PHASE-D SHEE", 0x31, "Bamum_Sup"),
    c(0x168FE, None, "BAMUM LETTER PHASE-D NGKAP", 0x31, "Bamum_Sup"),
    c(0x168FF, None, "BAMUM LETTER PHASE-D KEUAETMEUN", 0x31, "Bamum_Sup"),
    c(0x16900, None, "BAMUM LETTER PHASE-D TEUT", 0x31, "Bamum_Sup"),
    c(0x16901, None, "BAMUM LETTER PHASE-D SHEUAE", 0x31, "Bamum_Sup"),
    c(0x16902, None, "BAMUM LETTER PHASE-D NJAP", 0x31, "Bamum_Sup"),
    c(0x16903, None, "BAMUM LETTER PHASE-D SUE", 0x31, "Bamum_Sup"),
    c(0x16904, None, "BAMUM LETTER PHASE-D KET", 0x31, "Bamum_Sup"),
    c(0x16905, None, "BAMUM LETTER PHASE-D YAEMMAE", 0x31, "Bamum_Sup"),
    c(0x16906, None, "BAMUM LETTER PHASE-D KUOM", 0x31, "Bamum_Sup"),
    c(0x16907, None, "BAMUM LETTER PHASE-D SAP", 0x31, "Bamum_Sup"),
    c(0x16908, None, "BAMUM LETTER PHASE-D MFEUT", 0x31, "Bamum_Sup"),
    c(0x16909, None, "BAMUM LETTER PHASE-D NDEUX", 0x31, "Bamum_Sup"),
    c(0x1690A, None, "BAMUM LETTER PHASE-D MALEERI", 0x31, "Bamum_Sup"),
    c(0x1690B, None, "BAMUM LETTER PHASE-D MEUT", 0x31, "Bamum_Sup"),
    c(0x1690C, None, "BAMUM LETTER PHASE-D SEUAEQ", 0x31, "Bamum_Sup"),
    c(0x1690D, None, "BAMUM LETTER PHASE-D YEN", 0x31, "Bamum_Sup"),
    c(0x1690E, None, "BAMUM LETTER PHASE-D NJEUAEM", 0x31, "Bamum_Sup"),
    c(0x1690F, None, "BAMUM LETTER PHASE-D KEUOT MBUAE", 0x31, "Bamum_Sup"),
    c(0x16910, None, "BAMUM LETTER PHASE-D NGKEURI", 0x31, "Bamum_Sup"),
    c(0x16911, None, "BAMUM LETTER PHASE-D TU", 0x31, "Bamum_Sup"),
    c(0x16912, None, "BAMUM LETTER PHASE-D GHAA", 0x31, "Bamum_Sup"),
    c(0x16913, None, "BAMUM LETTER PHASE-D NGKYEE", 0x31, "Bamum_Sup"),
    c(0x16914, None, "BAMUM LETTER PHASE-D FEUFEUAET", 0x31, "Bamum_Sup"),
    c(0x16915, None, "BAMUM LETTER PHASE-D NDEE", 0x31, "Bamum_Sup"),
    c(0x16916, None, "BAMUM LETTER PHASE-D MGBOFUM", 0x31, "Bamum_Sup"),
    c(0x16917, None, "BAMUM LETTER PHASE-D LEUAEP", 0x31, "Bamum_Sup"),
    c(0x16918, None, "BAMUM LETTER PHASE-D NDON", 0x31, "Bamum_Sup"),
    c(0x16919, None, "BAMUM LETTER PHASE-D MONI", 0x31, "Bamum_Sup"),
    c(0x1691A, None, "BAMUM LETTER PHASE-D MGBEUN", 0x31, "Bamum_Sup"),
    c(0x1691B, None, "BAMUM LETTER PHASE-D PUUT", 0x31, "Bamum_Sup"),
    c(0x1691C, None, "BAMUM LETTER PHASE-D MGBIEE", 0x31, "Bamum_Sup"),
    c(0x1691D, None, "BAMUM LETTER PHASE-D MFO", 0x31, "Bamum_Sup"),
    c(0x1691E, None, "BAMUM LETTER PHASE-D LUM", 0x31, "Bamum_Sup"),
    c(0x1691F, None, "BAMUM LETTER PHASE-D NSIEEP", 0x31, "Bamum_Sup"),
    c(0x16920, None, "BAMUM LETTER PHASE-D MBAA", 0x31, "Bamum_Sup"),
    c(0x16921, None, "BAMUM LETTER PHASE-D KWAET", 0x31, "Bamum_Sup"),
    c(0x16922, None, "BAMUM LETTER PHASE-D NYET", 0x31, "Bamum_Sup"),
    c(0x16923, None, "BAMUM LETTER PHASE-D TEUAEN", 0x31, "Bamum_Sup"),
    c(0x16924, None, "BAMUM LETTER PHASE-D SOT", 0x31, "Bamum_Sup"),
    c(0x16925, None, "BAMUM LETTER PHASE-D YUWOQ", 0x31, "Bamum_Sup"),
    c(0x16926, None, "BAMUM LETTER PHASE-D KEUM", 0x31, "Bamum_Sup"),
    c(0x16927, None, "BAMUM LETTER PHASE-D RAEM", 0x31, "Bamum_Sup"),
    c(0x16928, None, "BAMUM LETTER PHASE-D TEEEE", 0x31, "Bamum_Sup"),
    c(0x16929, None, "BAMUM LETTER PHASE-D NGKEUAEQ", 0x31, "Bamum_Sup"),
    c(0x1692A, None, "BAMUM LETTER PHASE-D MFEUAE", 0x31, "Bamum_Sup"),
    c(0x1692B, None, "BAMUM LETTER PHASE-D NSIEET", 0x31, "Bamum_Sup"),
    c(0x1692C, None, "BAMUM LETTER PHASE-D KEUP", 0x31, "Bamum_Sup"),
    c(0x1692D, None, "BAMUM LETTER PHASE-D PIP", 0x31, "Bamum_Sup"),
    c(0x1692E, None, "BAMUM LETTER PHASE-D PEUTAE", 0x31, "Bamum_Sup"),
    c(0x1692F, None, "BAMUM LETTER PHASE-D NYUE", 0x31, "Bamum_Sup"),
    c(0x16930, None, "BAMUM LETTER PHASE-D LET", 0x31, "Bamum_Sup"),
    c(0x16931, None, "BAMUM LETTER PHASE-D NGGAAM", 0x31, "Bamum_Sup"),
    c(0x16932, None, "BAMUM LETTER PHASE-D MFIEE", 0x31, "Bamum_Sup"),
    c(0x16933, None, "BAMUM LETTER PHASE-D NGGWAEN", 0x31, "Bamum_Sup"),
    c(0x16934, None, "BAMUM LETTER PHASE-D YUOM", 0x31, "Bamum_Sup"),
    c(0x16935, None, "BAMUM LETTER PHASE-D PAP", 0x31, "Bamum_Sup"),
    c(0x16936, None, "BAMUM LETTER PHASE-D YUOP", 0x31, "Bamum_Sup"),
    c(0x16937, None, "BAMUM LETTER PHASE-D NDAM", 0x31, "Bamum_Sup"),
    c(0x16938, None, "BAMUM LETTER PHASE-D NTEUM", 0x31, "Bamum_Sup"),
    c(0x16939, None, "BAMUM LETTER PHASE-D SUAE", 0x31, "Bamum_Sup"),
    c(0x1693A, None, "BAMUM LETTER PHASE-D KUN", 0x31, "Bamum_Sup"),
    c(0x1693B, None, "BAMUM LETTER PHASE-D NGGEUX", 0x31, "Bamum_Sup"),
    c(0x1693C, None, "BAMUM LETTER PHASE-D NGKIEE", 0x31, "Bamum_Sup"),
    c(0x1693D, None, "BAMUM LETTER PHASE-D TUOT", 0x31, "Bamum_Sup"),
    c(0x1693E, None, "BAMUM LETTER PHASE-D MEUN", 0x31, "Bamum_Sup"),
    c(0x1693F, None, "BAMUM LETTER PHASE-D KUQ", 0x31, "Bamum_Sup"),
    c(0x16940, None, "BAMUM LETTER PHASE-D NSUM", 0x31, "Bamum_Sup"),
    c(0x16941, None, "BAMUM LETTER PHASE-D TEUN", 0x31, "Bamum_Sup"),
    c(0x16942, None, "BAMUM LETTER PHASE-D MAENJET", 0x31, "Bamum_Sup"),
    c(0x16943, None, "BAMUM LETTER PHASE-D NGGAP", 0x31, "Bamum_Sup"),
    c(0x16944, None, "BAMUM LETTER PHASE-D LEUM", 0x31, "Bamum_Sup"),
    c(0x16945, None, "BAMUM LETTER PHASE-D NGGUOM", 0x31, "Bamum_Sup"),
    c(0x16946, None, "BAMUM LETTER PHASE-D NSHUT", 0x31, "Bamum_Sup"),
    c(0x16947, None, "BAMUM LETTER PHASE-D NJUEQ", 0x31, "Bamum_Sup"),
    c(0x16948, None, "BAMUM LETTER PHASE-D GHEUAE", 0x31, "Bamum_Sup"),
    c(0x16949, None, "BAMUM LETTER PHASE-D KU", 0x31, "Bamum_Sup"),
    c(0x1694A, None, "BAMUM LETTER PHASE-D REN OLD", 0x31, "Bamum_Sup"),
    c(0x1694B, None, "BAMUM LETTER PHASE-D TAE", 0x31, "Bamum_Sup"),
    c(0x1694C, None, "BAMUM LETTER PHASE-D TOQ", 0x31, "Bamum_Sup"),
    c(0x1694D, None, "BAMUM LETTER PHASE-D NYI", 0x31, "Bamum_Sup"),
    c(0x1694E, None, "BAMUM LETTER PHASE-D RII", 0x31, "Bamum_Sup"),
    c(0x1694F, None, "BAMUM LETTER PHASE-D LEEEE", 0x31, "Bamum_Sup"),
    c(0x16950, None, "BAMUM LETTER PHASE-D MEEEE", 0x31, "Bamum_Sup"),
    c(0x16951, None, "BAMUM LETTER PHASE-D M", 0x31, "Bamum_Sup"),
    c(0x16952, None, "BAMUM LETTER PHASE-D SUU", 0x31, "Bamum_Sup"),
    c(0x16953, None, "BAMUM LETTER PHASE-D MU", 0x31, "Bamum_Sup"),
    c(0x16954, None, "BAMUM LETTER PHASE-D SHII", 0x31, "Bamum_Sup"),
    c(0x16955, None, "BAMUM LETTER PHASE-D SHEUX", 0x31, "Bamum_Sup"),
    c(0x16956, None, "BAMUM LETTER PHASE-D KYEE", 0x31, "Bamum_Sup"),
    c(0x16957, None, "BAMUM LETTER PHASE-D NU", 0x31, "Bamum_Sup"),
    c(0x16958, None, "BAMUM LETTER PHASE-D SHU", 0x31, "Bamum_Sup"),
    c(0x16959, None, "BAMUM LETTER PHASE-D NTEE", 0x31, "Bamum_Sup"),
    c(0x1695A, None, "BAMUM LETTER PHASE-D PEE", 0x31, "Bamum_Sup"),
    c(0x1695B, None, "BAMUM LETTER PHASE-D NI", 0x31, "Bamum_Sup"),
    c(0x1695C, None, "BAMUM LETTER PHASE-D SHOQ", 0x31, "Bamum_Sup"),
    c(0x1695D, None, "BAMUM LETTER PHASE-D PUQ", 0x31, "Bamum_Sup"),
    c(0x1695E, None, "BAMUM LETTER PHASE-D MVOP", 0x31, "Bamum_Sup"),
    c(0x1695F, None, "BAMUM LETTER PHASE-D LOQ", 0x31, "Bamum_Sup"),
    c(0x16960, None, "BAMUM LETTER PHASE-D REN MUCH", 0x31, "Bamum_Sup"),
    c(0x16961, None, "BAMUM LETTER PHASE-D TI", 0x31, "Bamum_Sup"),
    c(0x16962, None, "BAMUM LETTER PHASE-D NTUU", 0x31, "Bamum_Sup"),
    c(0x16963, None, "BAMUM LETTER PHASE-D MBAA SEVEN", 0x31, "Bamum_Sup"),
    c(0x16964, None, "BAMUM LETTER PHASE-D SAQ", 0x31, "Bamum_Sup"),
    c(0x16965, None, "BAMUM LETTER PHASE-D FAA", 0x31, "Bamum_Sup"),
    c(0x16966, None, "BAMUM LETTER PHASE-E NDAP", 0x31, "Bamum_Sup"),
    c(0x16967, None, "BAMUM LETTER PHASE-E TOON", 0x31, "Bamum_Sup"),
    c(0x16968, None, "BAMUM LETTER PHASE-E MBEUM", 0x31, "Bamum_Sup"),
    c(0x16969, None, "BAMUM LETTER PHASE-E LAP", 0x31, "Bamum_Sup"),
    c(0x1696A, None, "BAMUM LETTER PHASE-E VOM", 0x31, "Bamum_Sup"),
    c(0x1696B, None, "BAMUM LETTER PHASE-E LOON", 0x31, "Bamum_Sup"),
    c(0x1696C, None, "BAMUM LETTER PHASE-E PAA", 0x31, "Bamum_Sup"),
    c(0x1696D, None, "BAMUM LETTER PHASE-E SOM", 0x31, "Bamum_Sup"),
    c(0x1696E, None, "BAMUM LETTER PHASE-E RAQ", 0x31, "Bamum_Sup"),
    c(0x1696F, None, "BAMUM LETTER PHASE-E NSHUOP", 0x31, "Bamum_Sup"),
    c(0x16970, None, "BAMUM LETTER PHASE-E NDUN", 0x31, "Bamum_Sup"),
    c(0x16971, None, "BAMUM LETTER PHASE-E PUAE", 0x31, "Bamum_Sup"),
    c(0x16972, None, "BAMUM LETTER PHASE-E TAM", 0x31, "Bamum_Sup"),
    c(0x16973, None, "BAMUM LETTER PHASE-E NGKA", 0x31, "Bamum_Sup"),
    c(0x16974, None, "BAMUM LETTER PHASE-E KPEUX", 0x31, "Bamum_Sup"),
    c(0x16975, None, "BAMUM LETTER PHASE-E WUO", 0x31, "Bamum_Sup"),
    c(0x16976, None, "BAMUM LETTER PHASE-E SEE", 0x31, "Bamum_Sup"),
    c(0x16977, None, "BAMUM LETTER PHASE-E NGGEUAET", 0x31, "Bamum_Sup"),
    c(0x16978, None, "BAMUM LETTER PHASE-E PAAM", 0x31, "Bamum_Sup"),
    c(0x16979, None, "BAMUM LETTER PHASE-E TOO", 0x31, "Bamum_Sup"),
    c(0x1697A, None, "BAMUM LETTER PHASE-E KUOP", 0x31, "Bamum_Sup"),
    c(0x1697B, None, "BAMUM LETTER PHASE-E LOM", 0x31, "Bamum_Sup"),
    c(0x1697C, None, "BAMUM LETTER PHASE-E NSHIEE", 0x31, "Bamum_Sup"),
    c(0x1697D, None, "BAMUM LETTER PHASE-E NGOP", 0x31, "Bamum_Sup"),
    c(0x1697E, None, "BAMUM LETTER PHASE-E MAEM", 0x31, "Bamum_Sup"),
    c(0x1697F, None, "BAMUM LETTER PHASE-E NGKEUX", 0x31, "Bamum_Sup"),
    c(0x16980, None, "BAMUM LETTER PHASE-E NGOQ", 0x31, "Bamum_Sup"),
    c(0x16981, None, "BAMUM LETTER PHASE-E NSHUE", 0x31, "Bamum_Sup"),
    c(0x16982, None, "BAMUM LETTER PHASE-E RIMGBA", 0x31, "Bamum_Sup"),
    c(0x16983, None, "BAMUM LETTER PHASE-E NJEUX", 0x31, "Bamum_Sup"),
    c(0x16984, None, "BAMUM LETTER PHASE-E PEEM", 0x31, "Bamum_Sup"),
    c(0x16985, None, "BAMUM LETTER PHASE-E SAA", 0x31, "Bamum_Sup"),
    c(0x16986, None, "BAMUM LETTER PHASE-E NGGURAE", 0x31, "Bamum_Sup"),
    c(0x16987, None, "BAMUM LETTER PHASE-E MGBA", 0x31, "Bamum_Sup"),
    c(0x16988, None, "BAMUM LETTER PHASE-E GHEUX", 0x31, "Bamum_Sup"),
    c(0x16989, None, "BAMUM LETTER PHASE-E NGKEUAEM", 0x31, "Bamum_Sup"),
    c(0x1698A, None, "BAMUM LETTER PHASE-E NJAEMLI", 0x31, "Bamum_Sup"),
    c(0x1698B, None, "BAMUM LETTER PHASE-E MAP", 0x31, "Bamum_Sup"),
    c(0x1698C, None, "BAMUM LETTER PHASE-E LOOT", 0x31, "Bamum_Sup"),
    c(0x1698D, None, "BAMUM LETTER PHASE-E NGGEEEE", 0x31, "Bamum_Sup"),
    c(0x1698E, None, "BAMUM LETTER PHASE-E NDIQ", 0x31, "Bamum_Sup"),
    c(0x1698F, None, "BAMUM LETTER PHASE-E TAEN NTEUM", 0x31, "Bamum_Sup"),
    c(0x16990, None, "BAMUM LETTER PHASE-E SET", 0x31, "Bamum_Sup"),
    c(0x16991, None, "BAMUM LETTER PHASE-E PUM", 0x31, "Bamum_Sup"),
    c(0x16992, None, "BAMUM LETTER PHASE-E NDAA SOFTNESS", 0x31, "Bamum_Sup"),
    c(0x16993, None, "BAMUM LETTER PHASE-E NGGUAESHAE NYAM", 0x31, "Bamum_Sup"),
    c(0x16994, None, "BAMUM LETTER PHASE-E YIEE", 0x31, "Bamum_Sup"),
    c(0x16995, None, "BAMUM LETTER PHASE-E GHEUN", 0x31, "Bamum_Sup"),
    c(0x16996, None, "BAMUM LETTER PHASE-E TUAE", 0x31, "Bamum_Sup"),
    c(0x16997, None, "BAMUM LETTER PHASE-E YEUAE", 0x31, "Bamum_Sup"),
    c(0x16998, None, "BAMUM LETTER PHASE-E PO", 0x31, "Bamum_Sup"),
    c(0x16999, None, "BAMUM LETTER PHASE-E TUMAE", 0x31, "Bamum_Sup"),
    c(0x1699A, None, "BAMUM LETTER PHASE-E KEUAE", 0x31, "Bamum_Sup"),
    c(0x1699B, None, "BAMUM LETTER PHASE-E SUAEN", 0x31, "Bamum_Sup"),
    c(0x1699C, None, "BAMUM LETTER PHASE-E TEUAEQ", 0x31, "Bamum_Sup"),
    c(0x1699D, None, "BAMUM LETTER PHASE-E VEUAE", 0x31, "Bamum_Sup"),
    c(0x1699E, None, "BAMUM LETTER PHASE-E WEUX", 0x31, "Bamum_Sup"),
    c(0x1699F, None, "BAMUM LETTER PHASE-E LAAM", 0x31, "Bamum_Sup"),
    c(0x169A0, None, "BAMUM LETTER PHASE-E PU", 0x31, "Bamum_Sup"),
    c(0x169A1, None, "BAMUM LETTER PHASE-E TAAQ", 0x31, "Bamum_Sup"),
    c(0x169A2, None, "BAMUM LETTER PHASE-E GHAAMAE", 0x31, "Bamum_Sup"),
    c(0x169A3, None, "BAMUM LETTER PHASE-E NGEUREUT", 0x31, "Bamum_Sup"),
    c(0x169A4, None, "BAMUM LETTER PHASE-E SHEUAEQ", 0x31, "Bamum_Sup"),
    c(0x169A5, None, "BAMUM LETTER PHASE-E MGBEN", 0x31, "Bamum_Sup"),
    c(0x169A6, None, "BAMUM LETTER PHASE-E MBEE", 0x31, "Bamum_Sup"),
    c(0x169A7, None, "BAMUM LETTER PHASE-E NZAQ", 0x31, "Bamum_Sup"),
    c(0x169A8, None, "BAMUM LETTER PHASE-E NKOM", 0x31, "Bamum_Sup"),
    c(0x169A9, None, "BAMUM LETTER PHASE-E GBET", 0x31, "Bamum_Sup"),
    c(0x169AA, None, "BAMUM LETTER PHASE-E TUM", 0x31, "Bamum_Sup"),
    c(0x169AB, None, "BAMUM LETTER PHASE-E KUET", 0x31, "Bamum_Sup"),
    c(0x169AC, None, "BAMUM LETTER PHASE-E YAP", 0x31, "Bamum_Sup"),
    c(0x169AD, None, "BAMUM LETTER PHASE-E NYI CLEAVER", 0x31, "Bamum_Sup"),
    c(0x169AE, None, "BAMUM LETTER PHASE-E YIT", 0x31, "Bamum_Sup"),
    c(0x169AF, None, "BAMUM LETTER PHASE-E MFEUQ", 0x31, "Bamum_Sup"),
    c(0x169B0, None, "BAMUM LETTER PHASE-E NDIAQ", 0x31, "Bamum_Sup"),
    c(0x169B1, None, "BAMUM LETTER PHASE-E PIEEQ", 0x31, "Bamum_Sup"),
    c(0x169B2, None, "BAMUM LETTER PHASE-E YUEQ", 0x31, "Bamum_Sup"),
    c(0x169B3, None, "BAMUM LETTER PHASE-E LEUAEM", 0x31, "Bamum_Sup"),
    c(0x169B4, None, "BAMUM LETTER PHASE-E FUE", 0x31, "Bamum_Sup"),
    c(0x169B5, None, "BAMUM LETTER PHASE-E GBEUX", 0x31, "Bamum_Sup"),
    c(0x169B6, None, "BAMUM LETTER PHASE-E NGKUP", 0x31, "Bamum_Sup"),
    c(0x169B7, None, "BAMUM LETTER PHASE-E KET", 0x31, "Bamum_Sup"),
    c(0x169B8, None, "BAMUM LETTER PHASE-E MAE", 0x31, "Bamum_Sup"),
    c(0x169B9, None, "BAMUM LETTER PHASE-E NGKAAMI", 0x31, "Bamum_Sup"),
    c(0x169BA, None, "BAMUM LETTER PHASE-E GHET", 0x31, "Bamum_Sup"),
    c(0x169BB, None, "BAMUM LETTER PHASE-E FA", 0x31, "Bamum_Sup"),
    c(0x169BC, None, "BAMUM LETTER PHASE-E NTUM", 0x31, "Bamum_Sup"),
    c(0x169BD, None, "BAMUM LETTER PHASE-E PEUT", 0x31, "Bamum_Sup"),
    c(0x169BE, None, "BAMUM LETTER PHASE-E YEUM", 0x31, "Bamum_Sup"),
    c(0x169BF, None, "BAMUM LETTER PHASE-E NGGEUAE", 0x31, "Bamum_Sup"),
    c(0x169C0, None, "BAMUM LETTER PHASE-E NYI BETWEEN", 0x31, "Bamum_Sup"),
    c(0x169C1, None, "BAMUM LETTER PHASE-E NZUQ", 0x31, "Bamum_Sup"),
    c(0x169C2, None, "BAMUM LETTER PHASE-E POON", 0x31, "Bamum_Sup"),
    c(0x169C3, None, "BAMUM LETTER PHASE-E MIEE", 0x31, "Bamum_Sup"),
    c(0x169C4, None, "BAMUM LETTER PHASE-E FUET", 0x31, "Bamum_Sup"),
    c(0x169C5, None, "BAMUM LETTER PHASE-E NAE", 0x31, "Bamum_Sup"),
    c(0x169C6, None, "BAMUM LETTER PHASE-E MUAE", 0x31, "Bamum_Sup"),
    c(0x169C7, None, "BAMUM LETTER PHASE-E GHEUAE", 0x31, "Bamum_Sup"),
    c(0x169C8, None, "BAMUM LETTER PHASE-E FU I", 0x31, "Bamum_Sup"),
    c(0x169C9, None, "BAMUM LETTER PHASE-E MVI", 0x31, "Bamum_Sup"),
    c(0x169CA, None, "BAMUM LETTER PHASE-E PUAQ", 0x31, "Bamum_Sup"),
    c(0x169CB, None, "BAMUM LETTER PHASE-E NGKUM", 0x31, "Bamum_Sup"),
    c(0x169CC, None, "BAMUM LETTER PHASE-E KUT", 0x31, "Bamum_Sup"),
    c(0x169CD, None, "BAMUM LETTER PHASE-E PIET", 0x31, "Bamum_Sup"),
    c(0x169CE, None, "BAMUM LETTER PHASE-E NTAP", 0x31, "Bamum_Sup"),
    c(0x169CF, None, "BAMUM LETTER PHASE-E YEUAET", 0x31, "Bamum_Sup"),
    c(0x169D0, None, "BAMUM LETTER PHASE-E NGGUP", 0x31, "Bamum_Sup"),
    c(0x169D1, None, "BAMUM LETTER PHASE-E PA PEOPLE", 0x31, "Bamum_Sup"),
    c(0x169D2, None, "BAMUM LETTER PHASE-E FU CALL", 0x31, "Bamum_Sup"),
    c(0x169D3, None, "BAMUM LETTER PHASE-E FOM", 0x31, "Bamum_Sup"),
    c(0x169D4, None, "BAMUM LETTER PHASE-E NJEE", 0x31, "Bamum_Sup"),
    c(0x169D5, None, "BAMUM LETTER PHASE-E A", 0x31, "Bamum_Sup"),
    c(0x169D6, None, "BAMUM LETTER PHASE-E TOQ", 0x31, "Bamum_Sup"),
    c(0x169D7, None, "BAMUM LETTER PHASE-E O", 0x31, "Bamum_Sup"),
    c(0x169D8, None, "BAMUM LETTER PHASE-E I", 0x31, "Bamum_Sup"),
    c(0x169D9, None, "BAMUM LETTER PHASE-E LAQ", 0x31, "Bamum_Sup"),
    c(0x169DA, None, "BAMUM LETTER PHASE-E PA PLURAL", 0x31, "Bamum_Sup"),
    c(0x169DB, None, "BAMUM LETTER PHASE-E TAA", 0x31, "Bamum_Sup"),
    c(0x169DC, None, "BAMUM LETTER PHASE-E TAQ", 0x31, "Bamum_Sup"),
    c(0x169DD, None, "BAMUM LETTER PHASE-E NDAA MY HOUSE", 0x31, "Bamum_Sup"),
    c(0x169DE, None, "BAMUM LETTER PHASE-E SHIQ", 0x31, "Bamum_Sup"),
    c(0x169DF, None, "BAMUM LETTER PHASE-E YEUX", 0x31, "Bamum_Sup"),
    c(0x169E0, None, "BAMUM LETTER PHASE-E NGUAE", 0x31, "Bamum_Sup"),
    c(0x169E1, None, "BAMUM LETTER PHASE-E YUAEN", 0x31, "Bamum_Sup"),
    c(0x169E2, None, "BAMUM LETTER PHASE-E YOQ SWIMMING", 0x31, "Bamum_Sup"),
    c(0x169E3, None, "BAMUM LETTER PHASE-E YOQ COVER", 0x31, "Bamum_Sup"),
    c(0x169E4, None, "BAMUM LETTER PHASE-E YUQ", 0x31, "Bamum_Sup"),
    c(0x169E5, None, "BAMUM LETTER PHASE-E YUN", 0x31, "Bamum_Sup"),
    c(0x169E6, None, "BAMUM LETTER PHASE-E KEUX", 0x31, "Bamum_Sup"),
    c(0x169E7, None, "BAMUM LETTER PHASE-E PEUX", 0x31, "Bamum_Sup"),
    c(0x169E8, None, "BAMUM LETTER PHASE-E NJEE EPOCH", 0x31, "Bamum_Sup"),
    c(0x169E9, None, "BAMUM LETTER PHASE-E PUE", 0x31, "Bamum_Sup"),
    c(0x169EA, None, "BAMUM LETTER PHASE-E WUE", 0x31, "Bamum_Sup"),
    c(0x169EB, None, "BAMUM LETTER PHASE-E FEE", 0x31, "Bamum_Sup"),
    c(0x169EC, None, "BAMUM LETTER PHASE-E VEE", 0x31, "Bamum_Sup"),
    c(0x169ED, None, "BAMUM LETTER PHASE-E LU", 0x31, "Bamum_Sup"),
    c(0x169EE, None, "BAMUM LETTER PHASE-E MI", 0x31, "Bamum_Sup"),
    c(0x169EF, None, "BAMUM LETTER PHASE-E REUX", 0x31, "Bamum_Sup"),
    c(0x169F0, None, "BAMUM LETTER PHASE-E RAE", 0x31, "Bamum_Sup"),
    c(0x169F1, None, "BAMUM LETTER PHASE-E NGUAET", 0x31, "Bamum_Sup"),
    c(0x169F2, None, "BAMUM LETTER PHASE-E NGA", 0x31, "Bamum_Sup"),
    c(0x169F3, None, "BAMUM LETTER PHASE-E SHO", 0x31, "Bamum_Sup"),
    c(0x169F4, None, "BAMUM LETTER PHASE-E SHOQ", 0x31, "Bamum_Sup"),
    c(0x169F5, None, "BAMUM LETTER PHASE-E FU REMEDY", 0x31, "Bamum_Sup"),
    c(0x169F6, None, "BAMUM LETTER PHASE-E NA", 0x31, "Bamum_Sup"),
    c(0x169F7, None, "BAMUM LETTER PHASE-E PI", 0x31, "Bamum_Sup"),
    c(0x169F8, None, "BAMUM LETTER PHASE-E LOQ", 0x31, "Bamum_Sup"),
    c(0x169F9, None, "BAMUM LETTER PHASE-E KO", 0x31, "Bamum_Sup"),
    c(0x169FA, None, "BAMUM LETTER PHASE-E MEN", 0x31, "Bamum_Sup"),
    c(0x169FB, None, "BAMUM LETTER PHASE-E MA", 0x31, "Bamum_Sup"),
    c(0x169FC, None, "BAMUM LETTER PHASE-E MAQ", 0x31, "Bamum_Sup"),
    c(0x169FD, None, "BAMUM LETTER PHASE-E TEU", 0x31, "Bamum_Sup"),
    c(0x169FE, None, "BAMUM LETTER PHASE-E KI", 0x31, "Bamum_Sup"),
    c(0x169FF, None, "BAMUM LETTER PHASE-E MON", 0x31, "Bamum_Sup"),
    c(0x16A00, None, "BAMUM LETTER PHASE-E TEN", 0x31, "Bamum_Sup"),
    c(0x16A01, None, "BAMUM LETTER PHASE-E FAQ", 0x31, "Bamum_Sup"),
    c(0x16A02, None, "BAMUM LETTER PHASE-E GHOM", 0x31, "Bamum_Sup"),
    c(0x16A03, None, "BAMUM LETTER PHASE-F KA", 0x31, "Bamum_Sup"),
    c(0x16A04, None, "BAMUM LETTER PHASE-F U", 0x31, "Bamum_Sup"),
    c(0x16A05, None, "BAMUM LETTER PHASE-F KU", 0x31, "Bamum_Sup"),
    c(0x16A06, None, "BAMUM LETTER PHASE-F EE", 0x31, "Bamum_Sup"),
    c(0x16A07, None, "BAMUM LETTER PHASE-F REE", 0x31, "Bamum_Sup"),
    c(0x16A08, None, "BAMUM LETTER PHASE-F TAE", 0x31, "Bamum_Sup"),
    c(0x16A09, None, "BAMUM LETTER PHASE-F NYI", 0x31, "Bamum_Sup"),
    c(0x16A0A, None, "BAMUM LETTER PHASE-F LA", 0x31, "Bamum_Sup"),
    c(0x16A0B, None, "BAMUM LETTER PHASE-F RII", 0x31, "Bamum_Sup"),
    c(0x16A0C, None, "BAMUM LETTER PHASE-F RIEE", 0x31, "Bamum_Sup"),
    c(0x16A0D, None, "BAMUM LETTER PHASE-F MEEEE", 0x31, "Bamum_Sup"),
    c(0x16A0E, None, "BAMUM LETTER PHASE-F TAA", 0x31, "Bamum_Sup"),
    c(0x16A0F, None, "BAMUM LETTER PHASE-F NDAA", 0x31, "Bamum_Sup"),
    c(0x16A10, None, "BAMUM LETTER PHASE-F NJAEM", 0x31, "Bamum_Sup"),
    c(0x16A11, None, "BAMUM LETTER PHASE-F M", 0x31, "Bamum_Sup"),
    c(0x16A12, None, "BAMUM LETTER PHASE-F SUU", 0x31, "Bamum_Sup"),
    c(0x16A13, None, "BAMUM LETTER PHASE-F SHII", 0x31, "Bamum_Sup"),
    c(0x16A14, None, "BAMUM LETTER PHASE-F SI", 0x31, "Bamum_Sup"),
    c(0x16A15, None, "BAMUM LETTER PHASE-F SEUX", 0x31, "Bamum_Sup"),
    c(0x16A16, None, "BAMUM LETTER PHASE-F KYEE", 0x31, "Bamum_Sup"),
    c(0x16A17, None, "BAMUM LETTER PHASE-F KET", 0x31, "Bamum_Sup"),
    c(0x16A18, None, "BAMUM LETTER PHASE-F NUAE", 0x31, "Bamum_Sup"),
    c(0x16A19, None, "BAMUM LETTER PHASE-F NU", 0x31, "Bamum_Sup"),
    c(0x16A1A, None, "BAMUM LETTER PHASE-F NJUAE", 0x31, "Bamum_Sup"),
    c(0x16A1B, None, "BAMUM LETTER PHASE-F YOQ", 0x31, "Bamum_Sup"),
    c(0x16A1C, None, "BAMUM LETTER PHASE-F SHU", 0x31, "Bamum_Sup"),
    c(0x16A1D, None, "BAMUM LETTER PHASE-F YA", 0x31, "Bamum_Sup"),
    c(0x16A1E, None, "BAMUM LETTER PHASE-F NSHA", 0x31, "Bamum_Sup"),
    c(0x16A1F, None, "BAMUM LETTER PHASE-F PEUX", 0x31, "Bamum_Sup"),
    c(0x16A20, None, "BAMUM LETTER PHASE-F NTEE", 0x31, "Bamum_Sup"),
    c(0x16A21, None, "BAMUM LETTER PHASE-F WUE", 0x31, "Bamum_Sup"),
    c(0x16A22, None, "BAMUM LETTER PHASE-F PEE", 0x31, "Bamum_Sup"),
    c(0x16A23, None, "BAMUM LETTER PHASE-F RU", 0x31, "Bamum_Sup"),
    c(0x16A24, None, "BAMUM LETTER PHASE-F NI", 0x31, "Bamum_Sup"),
    c(0x16A25, None, "BAMUM LETTER PHASE-F REUX", 0x31, "Bamum_Sup"),
    c(0x16A26, None, "BAMUM LETTER PHASE-F KEN", 0x31, "Bamum_Sup"),
    c(0x16A27, None, "BAMUM LETTER PHASE-F NGKWAEN", 0x31, "Bamum_Sup"),
    c(0x16A28, None, "BAMUM LETTER PHASE-F NGGA", 0x31, "Bamum_Sup"),
    c(0x16A29, None, "BAMUM LETTER PHASE-F SHO", 0x31, "Bamum_Sup"),
    c(0x16A2A, None, "BAMUM LETTER PHASE-F PUAE", 0x31, "Bamum_Sup"),
    c(0x16A2B, None, "BAMUM LETTER PHASE-F FOM", 0x31, "Bamum_Sup"),
    c(0x16A2C, None, "BAMUM LETTER PHASE-F WA", 0x31, "Bamum_Sup"),
    c(0x16A2D, None, "BAMUM LETTER PHASE-F LI", 0x31, "Bamum_Sup"),
    c(0x16A2E, None, "BAMUM LETTER PHASE-F LOQ", 0x31, "Bamum_Sup"),
    c(0x16A2F, None, "BAMUM LETTER PHASE-F KO", 0x31, "Bamum_Sup"),
    c(0x16A30, None, "BAMUM LETTER PHASE-F MBEN", 0x31, "Bamum_Sup"),
    c(0x16A31, None, "BAMUM LETTER PHASE-F REN", 0x31, "Bamum_Sup"),
    c(0x16A32, None, "BAMUM LETTER PHASE-F MA", 0x31, "Bamum_Sup"),
    c(0x16A33, None, "BAMUM LETTER PHASE-F MO", 0x31, "Bamum_Sup"),
    c(0x16A34, None, "BAMUM LETTER PHASE-F MBAA", 0x31, "Bamum_Sup"),
    c(0x16A35, None, "BAMUM LETTER PHASE-F TET", 0x31, "Bamum_Sup"),
    c(0x16A36, None, "BAMUM LETTER PHASE-F KPA", 0x31, "Bamum_Sup"),
    c(0x16A37, None, "BAMUM LETTER PHASE-F SAMBA", 0x31, "Bamum_Sup"),
    c(0x16A38, None, "BAMUM LETTER PHASE-F VUEQ", 0x31, "Bamum_Sup"),
    c(0x16A40, None, "MRO LETTER TA", 0x31, "Mro"),
    c(0x16A41, None, "MRO LETTER NGI", 0x31, "Mro"),
    c(0x16A42, None, "MRO LETTER YO", 0x31, "Mro"),
    c(0x16A43, None, "MRO LETTER MIM", 0x31, "Mro"),
    c(0x16A44, None, "MRO LETTER BA", 0x31, "Mro"),
    c(0x16A45, None, "MRO LETTER DA", 0x31, "Mro"),
    c(0x16A46, None, "MRO LETTER A", 0x31, "Mro"),
    c(0x16A47, None, "MRO LETTER PHI", 0x31, "Mro"),
    c(0x16A48, None, "MRO LETTER KHAI", 0x31, "Mro"),
    c(0x16A49, None, "MRO LETTER HAO", 0x31, "Mro"),
    c(0x16A4A, None, "MRO LETTER DAI", 0x31, "Mro"),
    c(0x16A4B, None, "MRO LETTER CHU", 0x31, "Mro"),
    c(0x16A4C, None, "MRO LETTER KEAAE", 0x31, "Mro"),
    c(0x16A4D, None, "MRO LETTER OL", 0x31, "Mro"),
    c(0x16A4E, None, "MRO LETTER MAEM", 0x31, "Mro"),
    c(0x16A4F, None, "MRO LETTER NIN", 0x31, "Mro"),
    c(0x16A50, None, "MRO LETTER PA", 0x31, "Mro"),
    c(0x16A51, None, "MRO LETTER OO", 0x31, "Mro"),
    c(0x16A52, None, "MRO LETTER O", 0x31, "Mro"),
    c(0x16A53, None, "MRO LETTER RO", 0x31, "Mro"),
    c(0x16A54, None, "MRO LETTER SHI", 0x31, "Mro"),
    c(0x16A55, None, "MRO LETTER THEA", 0x31, "Mro"),
    c(0x16A56, None, "MRO LETTER EA", 0x31, "Mro"),
    c(0x16A57, None, "MRO LETTER WA", 0x31, "Mro"),
    c(0x16A58, None, "MRO LETTER E", 0x31, "Mro"),
    c(0x16A59, None, "MRO LETTER KO", 0x31, "Mro"),
    c(0x16A5A, None, "MRO LETTER LAN", 0x31, "Mro"),
    c(0x16A5B, None, "MRO LETTER LA", 0x31, "Mro"),
    c(0x16A5C, None, "MRO LETTER HAI", 0x31, "Mro"),
    c(0x16A5D, None, "MRO LETTER RI", 0x31, "Mro"),
    c(0x16A5E, None, "MRO LETTER TEK", 0x31, "Mro"),
    c(0x16A60, None, "MRO DIGIT ZERO", 0x20, "Mro"),
    c(0x16A61, None, "MRO DIGIT ONE", 0x20, "Mro"),
    c(0x16A62, None, "MRO DIGIT TWO", 0x20, "Mro"),
    c(0x16A63, None, "MRO DIGIT THREE", 0x20, "Mro"),
    c(0x16A64, None, "MRO DIGIT FOUR", 0x20, "Mro"),
    c(0x16A65, None, "MRO DIGIT FIVE", 0x20, "Mro"),
    c(0x16A66, None, "MRO DIGIT SIX", 0x20, "Mro"),
    c(0x16A67, None, "MRO DIGIT SEVEN", 0x20, "Mro"),
    c(0x16A68, None, "MRO DIGIT EIGHT", 0x20, "Mro"),
    c(0x16A69, None, "MRO DIGIT NINE", 0x20, "Mro"),
    c(0x16A6E, None, "MRO DANDA", 0x00, "Mro"),
    c(0x16A6F, None, "MRO DOUBLE DANDA", 0x00, "Mro"),
    c(0x16A70, None, "TANGSA LETTER OZ", 0x31, "Tangsa"),
    c(0x16A71, None, "TANGSA LETTER OC", 0x31, "Tangsa"),
    c(0x16A72, None, "TANGSA LETTER OQ", 0x31, "Tangsa"),
    c(0x16A73, None, "TANGSA LETTER OX", 0x31, "Tangsa"),
    c(0x16A74, None, "TANGSA LETTER AZ", 0x31, "Tangsa"),
    c(0x16A75, None, "TANGSA LETTER AC", 0x31, "Tangsa"),
    c(0x16A76, None, "TANGSA LETTER AQ", 0x31, "Tangsa"),
    c(0x16A77, None, "TANGSA LETTER AX", 0x31, "Tangsa"),
    c(0x16A78, None, "TANGSA LETTER VZ", 0x31, "Tangsa"),
    c(0x16A79, None, "TANGSA LETTER VC", 0x31, "Tangsa"),
    c(0x16A7A, None, "TANGSA LETTER VQ", 0x31, "Tangsa"),
    c(0x16A7B, None, "TANGSA LETTER VX", 0x31, "Tangsa"),
    c(0x16A7C, None, "TANGSA LETTER EZ", 0x31, "Tangsa"),
    c(0x16A7D, None, "TANGSA LETTER EC", 0x31, "Tangsa"),
    c(0x16A7E, None, "TANGSA LETTER EQ", 0x31, "Tangsa"),
    c(0x16A7F, None, "TANGSA LETTER EX", 0x31, "Tangsa"),
    c(0x16A80, None, "TANGSA LETTER IZ", 0x31, "Tangsa"),
    c(0x16A81, None, "TANGSA LETTER IC", 0x31, "Tangsa"),
    c(0x16A82, None, "TANGSA LETTER IQ", 0x31, "Tangsa"),
    c(0x16A83, None, "TANGSA LETTER IX", 0x31, "Tangsa"),
    c(0x16A84, None, "TANGSA LETTER UZ", 0x31, "Tangsa"),
    c(0x16A85, None, "TANGSA LETTER UC", 0x31, "Tangsa"),
    c(0x16A86, None, "TANGSA LETTER UQ", 0x31, "Tangsa"),
    c(0x16A87, None, "TANGSA LETTER UX", 0x31, "Tangsa"),
    c(0x16A88, None, "TANGSA LETTER AWZ", 0x31, "Tangsa"),
    c(0x16A89, None, "TANGSA LETTER AWC", 0x31, "Tangsa"),
    c(0x16A8A, None, "TANGSA LETTER AWQ", 0x31, "Tangsa"),
    c(0x16A8B, None, "TANGSA LETTER AWX", 0x31, "Tangsa"),
    c(0x16A8C, None, "TANGSA LETTER UIZ", 0x31, "Tangsa"),
    c(0x16A8D, None, "TANGSA LETTER UIC", 0x31, "Tangsa"),
    c(0x16A8E, None, "TANGSA LETTER UIQ", 0x31, "Tangsa"),
    c(0x16A8F, None, "TANGSA LETTER UIX", 0x31, "Tangsa"),
    c(0x16A90, None, "TANGSA LETTER FINAL NG", 0x31, "Tangsa"),
    c(0x16A91, None, "TANGSA LETTER LONG UEX", 0x31, "Tangsa"),
    c(0x16A92, None, "TANGSA LETTER SHORT UEZ", 0x31, "Tangsa"),
    c(0x16A93, None, "TANGSA LETTER SHORT AWX", 0x31, "Tangsa"),
    c(0x16A94, None, "TANGSA LETTER UEC", 0x31, "Tangsa"),
    c(0x16A95, None, "TANGSA LETTER UEZ", 0x31, "Tangsa"),
    c(0x16A96, None, "TANGSA LETTER UEQ", 0x31, "Tangsa"),
    c(0x16A97, None, "TANGSA LETTER UEX", 0x31, "Tangsa"),
    c(0x16A98, None, "TANGSA LETTER UIUZ", 0x31, "Tangsa"),
    c(0x16A99, None, "TANGSA LETTER UIUC", 0x31, "Tangsa"),
    c(0x16A9A, None, "TANGSA LETTER UIUQ", 0x31, "Tangsa"),
    c(0x16A9B, None, "TANGSA LETTER UIUX", 0x31, "Tangsa"),
    c(0x16A9C, None, "TANGSA LETTER MZ", 0x31, "Tangsa"),
    c(0x16A9D, None, "TANGSA LETTER MC", 0x31, "Tangsa"),
    c(0x16A9E, None, "TANGSA LETTER MQ", 0x31, "Tangsa"),
    c(0x16A9F, None, "TANGSA LETTER MX", 0x31, "Tangsa"),
    c(0x16AA0, None, "TANGSA LETTER KA", 0x31, "Tangsa"),
    c(0x16AA1, None, "TANGSA LETTER KHA", 0x31, "Tangsa"),
    c(0x16AA2, None, "TANGSA LETTER GA", 0x31, "Tangsa"),
    c(0x16AA3, None, "TANGSA LETTER NGA", 0x31, "Tangsa"),
    c(0x16AA4, None, "TANGSA LETTER SA", 0x31, "Tangsa"),
    c(0x16AA5, None, "TANGSA LETTER YA", 0x31, "Tangsa"),
    c(0x16AA6, None, "TANGSA LETTER WA", 0x31, "Tangsa"),
    c(0x16AA7, None, "TANGSA LETTER PA", 0x31, "Tangsa"),
    c(0x16AA8, None, "TANGSA LETTER NYA", 0x31, "Tangsa"),
    c(0x16AA9, None, "TANGSA LETTER PHA", 0x31, "Tangsa"),
    c(0x16AAA, None, "TANGSA LETTER BA", 0x31, "Tangsa"),
    c(0x16AAB, None, "TANGSA LETTER MA", 0x31, "Tangsa"),
    c(0x16AAC, None, "TANGSA LETTER NA", 0x31, "Tangsa"),
    c(0x16AAD, None, "TANGSA LETTER HA", 0x31, "Tangsa"),
    c(0x16AAE, None, "TANGSA LETTER LA", 0x31, "Tangsa"),
    c(0x16AAF, None, "TANGSA LETTER HTA", 0x31, "Tangsa"),
    c(0x16AB0, None, "TANGSA LETTER TA", 0x31, "Tangsa"),
    c(0x16AB1, None, "TANGSA LETTER DA", 0x31, "Tangsa"),
    c(0x16AB2, None, "TANGSA LETTER RA", 0x31, "Tangsa"),
    c(0x16AB3, None, "TANGSA LETTER NHA", 0x31, "Tangsa"),
    c(0x16AB4, None, "TANGSA LETTER SHA", 0x31, "Tangsa"),
    c(0x16AB5, None, "TANGSA LETTER CA", 0x31, "Tangsa"),
    c(0x16AB6, None, "TANGSA LETTER TSA", 0x31, "Tangsa"),
    c(0x16AB7, None, "TANGSA LETTER GHA", 0x31, "Tangsa"),
    c(0x16AB8, None, "TANGSA LETTER HTTA", 0x31, "Tangsa"),
    c(0x16AB9, None, "TANGSA LETTER THA", 0x31, "Tangsa"),
    c(0x16ABA, None, "TANGSA LETTER XA", 0x31, "Tangsa"),
    c(0x16ABB, None, "TANGSA LETTER FA", 0x31, "Tangsa"),
    c(0x16ABC, None, "TANGSA LETTER DHA", 0x31, "Tangsa"),
    c(0x16ABD, None, "TANGSA LETTER CHA", 0x31, "Tangsa"),
    c(0x16ABE, None, "TANGSA LETTER ZA", 0x31, "Tangsa"),
    c(0x16AC0, None, "TANGSA DIGIT ZERO", 0x20, "Tangsa"),
    c(0x16AC1, None, "TANGSA DIGIT ONE", 0x20, "Tangsa"),
    c(0x16AC2, None, "TANGSA DIGIT TWO", 0x20, "Tangsa"),
    c(0x16AC3, None, "TANGSA DIGIT THREE", 0x20, "Tangsa"),
    c(0x16AC4, None, "TANGSA DIGIT FOUR", 0x20, "Tangsa"),
    c(0x16AC5, None, "TANGSA DIGIT FIVE", 0x20, "Tangsa"),
    c(0x16AC6, None, "TANGSA DIGIT SIX", 0x20, "Tangsa"),
    c(0x16AC7, None, "TANGSA DIGIT SEVEN", 0x20, "Tangsa"),
    c(0x16AC8, None, "TANGSA DIGIT EIGHT", 0x20, "Tangsa"),
    c(0x16AC9, None, "TANGSA DIGIT NINE", 0x20, "Tangsa"),
    c(0x16AD0, None, "BASSA VAH LETTER ENNI", 0x31, "Bassa_Vah"),
    c(0x16AD1, None, "BASSA VAH LETTER KA", 0x31, "Bassa_Vah"),
    c(0x16AD2, None, "BASSA VAH LETTER SE", 0x31, "Bassa_Vah"),
    c(0x16AD3, None, "BASSA VAH LETTER FA", 0x31, "Bassa_Vah"),
    c(0x16AD4, None, "BASSA VAH LETTER MBE", 0x31, "Bassa_Vah"),
    c(0x16AD5, None, "BASSA VAH LETTER YIE", 0x31, "Bassa_Vah"),
    c(0x16AD6, None, "BASSA VAH LETTER GAH", 0x31, "Bassa_Vah"),
    c(0x16AD7, None, "BASSA VAH LETTER DHII", 0x31, "Bassa_Vah"),
    c(0x16AD8, None, "BASSA VAH LETTER KPAH", 0x31, "Bassa_Vah"),
    c(0x16AD9, None, "BASSA VAH LETTER JO", 0x31, "Bassa_Vah"),
    c(0x16ADA, None, "BASSA VAH LETTER HWAH", 0x31, "Bassa_Vah"),
    c(0x16ADB, None, "BASSA VAH LETTER WA", 0x31, "Bassa_Vah"),
    c(0x16ADC, None, "BASSA VAH LETTER ZO", 0x31, "Bassa_Vah"),
    c(0x16ADD, None, "BASSA VAH LETTER GBU", 0x31, "Bassa_Vah"),
    c(0x16ADE, None, "BASSA VAH LETTER DO", 0x31, "Bassa_Vah"),
    c(0x16ADF, None, "BASSA VAH LETTER CE", 0x31, "Bassa_Vah"),
    c(0x16AE0, None, "BASSA VAH LETTER UWU", 0x31, "Bassa_Vah"),
    c(0x16AE1, None, "BASSA VAH LETTER TO", 0x31, "Bassa_Vah"),
    c(0x16AE2, None, "BASSA VAH LETTER BA", 0x31, "Bassa_Vah"),
    c(0x16AE3, None, "BASSA VAH LETTER VU", 0x31, "Bassa_Vah"),
    c(0x16AE4, None, "BASSA VAH LETTER YEIN", 0x31, "Bassa_Vah"),
    c(0x16AE5, None, "BASSA VAH LETTER PA", 0x31, "Bassa_Vah"),
    c(0x16AE6, None, "BASSA VAH LETTER WADDA", 0x31, "Bassa_Vah"),
    c(0x16AE7, None, "BASSA VAH LETTER A", 0x31, "Bassa_Vah"),
    c(0x16AE8, None, "BASSA VAH LETTER O", 0x31, "Bassa_Vah"),
    c(0x16AE9, None, "BASSA VAH LETTER OO", 0x31, "Bassa_Vah"),
    c(0x16AEA, None, "BASSA VAH LETTER U", 0x31, "Bassa_Vah"),
    c(0x16AEB, None, "BASSA VAH LETTER EE", 0x31, "Bassa_Vah"),
    c(0x16AEC, None, "BASSA VAH LETTER E", 0x31, "Bassa_Vah"),
    c(0x16AED, None, "BASSA VAH LETTER I", 0x31, "Bassa_Vah"),
    c(0x16AF0, None, "BASSA VAH COMBINING HIGH TONE", 0x20, "Bassa_Vah"),
    c(0x16AF1, None, "BASSA VAH COMBINING LOW TONE", 0x20, "Bassa_Vah"),
    c(0x16AF2, None, "BASSA VAH COMBINING MID TONE", 0x20, "Bassa_Vah"),
    c(0x16AF3, None, "BASSA VAH COMBINING LOW-MID TONE", 0x20, "Bassa_Vah"),
    c(0x16AF4, None, "BASSA VAH COMBINING HIGH-LOW TONE", 0x20, "Bassa_Vah"),
    c(0x16AF5, None, "BASSA VAH FULL STOP", 0x00, "Bassa_Vah"),
    c(0x16B00, None, "PAHAWH HMONG VOWEL KEEB", 0x31, "Pahawh_Hmong"),
    c(0x16B01, None, "PAHAWH HMONG VOWEL KEEV", 0x31, "Pahawh_Hmong"),
    c(0x16B02, None, "PAHAWH HMONG VOWEL KIB", 0x31, "Pahawh_Hmong"),
    c(0x16B03, None, "PAHAWH HMONG VOWEL KIV", 0x31, "Pahawh_Hmong"),
    c(0x16B04, None, "PAHAWH HMONG VOWEL KAUB", 0x31, "Pahawh_Hmong"),
    c(0x16B05, None, "PAHAWH HMONG VOWEL KAUV", 0x31, "Pahawh_Hmong"),
    c(0x16B06, None, "PAHAWH HMONG VOWEL KUB", 0x31, "Pahawh_Hmong"),
    c(0x16B07, None, "PAHAWH HMONG VOWEL KUV", 0x31, "Pahawh_Hmong"),
    c(0x16B08, None, "PAHAWH HMONG VOWEL KEB", 0x31, "Pahawh_Hmong"),
    c(0x16B09, None, "PAHAWH HMONG VOWEL KEV", 0x31, "Pahawh_Hmong"),
    c(0x16B0A, None, "PAHAWH HMONG VOWEL KAIB", 0x31, "Pahawh_Hmong"),
    c(0x16B0B, None, "PAHAWH HMONG VOWEL KAIV", 0x31, "Pahawh_Hmong"),
    c(0x16B0C, None, "PAHAWH HMONG VOWEL KOOB", 0x31, "Pahawh_Hmong"),
    c(0x16B0D, None, "PAHAWH HMONG VOWEL KOOV", 0x31, "Pahawh_Hmong"),
    c(0x16B0E, None, "PAHAWH HMONG VOWEL KAWB", 0x31, "Pahawh_Hmong"),
    c(0x16B0F, None, "PAHAWH HMONG VOWEL KAWV", 0x31, "Pahawh_Hmong"),
    c(0x16B10, None, "PAHAWH HMONG VOWEL KUAB", 0x31, "Pahawh_Hmong"),
    c(0x16B11, None, "PAHAWH HMONG VOWEL KUAV", 0x31, "Pahawh_Hmong"),
    c(0x16B12, None, "PAHAWH HMONG VOWEL KOB", 0x31, "Pahawh_Hmong"),
    c(0x16B13, None, "PAHAWH HMONG VOWEL KOV", 0x31, "Pahawh_Hmong"),
    c(0x16B14, None, "PAHAWH HMONG VOWEL KIAB", 0x31, "Pahawh_Hmong"),
    c(0x16B15, None, "PAHAWH HMONG VOWEL KIAV", 0x31, "Pahawh_Hmong"),
    c(0x16B16, None, "PAHAWH HMONG VOWEL KAB", 0x31, "Pahawh_Hmong"),
    c(0x16B17, None, "PAHAWH HMONG VOWEL KAV", 0x31, "Pahawh_Hmong"),
    c(0x16B18, None, "PAHAWH HMONG VOWEL KWB", 0x31, "Pahawh_Hmong"),
    c(0x16B19, None, "PAHAWH HMONG VOWEL KWV", 0x31, "Pahawh_Hmong"),
    c(0x16B1A, None, "PAHAWH HMONG VOWEL KAAB", 0x31, "Pahawh_Hmong"),
    c(0x16B1B, None, "PAHAWH HMONG VOWEL KAAV", 0x31, "Pahawh_Hmong"),
    c(0x16B1C, None, "PAHAWH HMONG CONSONANT VAU", 0x31, "Pahawh_Hmong"),
    c(0x16B1D, None, "PAHAWH HMONG CONSONANT NTSAU", 0x31, "Pahawh_Hmong"),
    c(0x16B1E, None, "PAHAWH HMONG CONSONANT LAU", 0x31, "Pahawh_Hmong"),
    c(0x16B1F, None, "PAHAWH HMONG CONSONANT HAU", 0x31, "Pahawh_Hmong"),
    c(0x16B20, None, "PAHAWH HMONG CONSONANT NLAU", 0x31, "Pahawh_Hmong"),
    c(0x16B21, None, "PAHAWH HMONG CONSONANT RAU", 0x31, "Pahawh_Hmong"),
    c(0x16B22, None, "PAHAWH HMONG CONSONANT NKAU", 0x31, "Pahawh_Hmong"),
    c(0x16B23, None, "PAHAWH HMONG CONSONANT QHAU", 0x31, "Pahawh_Hmong"),
    c(0x16B24, None, "PAHAWH HMONG CONSONANT YAU", 0x31, "Pahawh_Hmong"),
    c(0x16B25, None, "PAHAWH HMONG CONSONANT HLAU", 0x31, "Pahawh_Hmong"),
    c(0x16B26, None, "PAHAWH HMONG CONSONANT MAU", 0x31, "Pahawh_Hmong"),
    c(0x16B27, None, "PAHAWH HMONG CONSONANT CHAU", 0x31, "Pahawh_Hmong"),
    c(0x16B28, None, "PAHAWH HMONG CONSONANT NCHAU", 0x31, "Pahawh_Hmong"),
    c(0x16B29, None, "PAHAWH HMONG CONSONANT HNAU", 0x31, "Pahawh_Hmong"),
    c(0x16B2A, None, "PAHAWH HMONG CONSONANT PLHAU", 0x31, "Pahawh_Hmong"),
    c(0x16B2B, None, "PAHAWH HMONG CONSONANT NTHAU", 0x31, "Pahawh_Hmong"),
    c(0x16B2C, None, "PAHAWH HMONG CONSONANT NAU", 0x31, "Pahawh_Hmong"),
    c(0x16B2D, None, "PAHAWH HMONG CONSONANT AU", 0x31, "Pahawh_Hmong"),
    c(0x16B2E, None, "PAHAWH HMONG CONSONANT XAU", 0x31, "Pahawh_Hmong"),
    c(0x16B2F, None, "PAHAWH HMONG CONSONANT CAU", 0x31, "Pahawh_Hmong"),
    c(0x16B30, None, "PAHAWH HMONG MARK CIM TUB", 0x20, "Pahawh_Hmong"),
    c(0x16B31, None, "PAHAWH HMONG MARK CIM SO", 0x20, "Pahawh_Hmong"),
    c(0x16B32, None, "PAHAWH HMONG MARK CIM KES", 0x20, "Pahawh_Hmong"),
    c(0x16B33, None, "PAHAWH HMONG MARK CIM KHAV", 0x20, "Pahawh_Hmong"),
    c(0x16B34, None, "PAHAWH HMONG MARK CIM SUAM", 0x20, "Pahawh_Hmong"),
    c(0x16B35, None, "PAHAWH HMONG MARK CIM HOM", 0x20, "Pahawh_Hmong"),
    c(0x16B36, None, "PAHAWH HMONG MARK CIM TAUM", 0x20, "Pahawh_Hmong"),
    c(0x16B37, None, "PAHAWH HMONG SIGN VOS THOM", 0x00, "Pahawh_Hmong"),
    c(0x16B38, None, "PAHAWH HMONG SIGN VOS TSHAB CEEB", 0x00, "Pahawh_Hmong"),
    c(0x16B39, None, "PAHAWH HMONG SIGN CIM CHEEM", 0x00, "Pahawh_Hmong"),
    c(0x16B3A, None, "PAHAWH HMONG SIGN VOS THIAB", 0x00, "Pahawh_Hmong"),
    c(0x16B3B, None, "PAHAWH HMONG SIGN VOS FEEM", 0x00, "Pahawh_Hmong"),
    c(0x16B3C, None, "PAHAWH HMONG SIGN XYEEM NTXIV", 0x00, "Pahawh_Hmong"),
    c(0x16B3D, None, "PAHAWH HMONG SIGN XYEEM RHO", 0x00, "Pahawh_Hmong"),
    c(0x16B3E, None, "PAHAWH HMONG SIGN XYEEM TOV", 0x00, "Pahawh_Hmong"),
    c(0x16B3F, None, "PAHAWH HMONG SIGN XYEEM FAIB", 0x00, "Pahawh_Hmong"),
    c(0x16B40, None, "PAHAWH HMONG SIGN VOS SEEV", 0x31, "Pahawh_Hmong"),
    c(0x16B41, None, "PAHAWH HMONG SIGN MEEJ SUAB", 0x31, "Pahawh_Hmong"),
    c(0x16B42, None, "PAHAWH HMONG SIGN VOS NRUA", 0x31, "Pahawh_Hmong"),
    c(0x16B43, None, "PAHAWH HMONG SIGN IB YAM", 0x31, "Pahawh_Hmong"),
    c(0x16B44, None, "PAHAWH HMONG SIGN XAUS", 0x00, "Pahawh_Hmong"),
    c(0x16B45, None, "PAHAWH HMONG SIGN CIM TSOV ROG", 0x00, "Pahawh_Hmong"),
    c(0x16B50, None, "PAHAWH HMONG DIGIT ZERO", 0x20, "Pahawh_Hmong"),
    c(0x16B51, None, "PAHAWH HMONG DIGIT ONE", 0x20, "Pahawh_Hmong"),
    c(0x16B52, None, "PAHAWH HMONG DIGIT TWO", 0x20, "Pahawh_Hmong"),
    c(0x16B53, None, "PAHAWH HMONG DIGIT THREE", 0x20, "Pahawh_Hmong"),
    c(0x16B54, None, "PAHAWH HMONG DIGIT FOUR", 0x20, "Pahawh_Hmong"),
    c(0x16B55, None, "PAHAWH HMONG DIGIT FIVE", 0x20, "Pahawh_Hmong"),
    c(0x16B56, None, "PAHAWH HMONG DIGIT SIX", 0x20, "Pahawh_Hmong"),
    c(0x16B57, None, "PAHAWH HMONG DIGIT SEVEN", 0x20, "Pahawh_Hmong"),
    c(0x16B58, None, "PAHAWH HMONG DIGIT EIGHT", 0x20, "Pahawh_Hmong"),
    c(0x16B59, None, "PAHAWH HMONG DIGIT NINE", 0x20, "Pahawh_Hmong"),
    c(0x16B5B, None, "PAHAWH HMONG NUMBER TENS", 0x00, "Pahawh_Hmong"),
    c(0x16B5C, None, "PAHAWH HMONG NUMBER HUNDREDS", 0x00, "Pahawh_Hmong"),
    c(0x16B5D, None, "PAHAWH HMONG NUMBER TEN THOUSANDS", 0x00, "Pahawh_Hmong"),
    c(0x16B5E, None, "PAHAWH HMONG NUMBER MILLIONS", 0x00, "Pahawh_Hmong"),
    c(0x16B5F, None, "PAHAWH HMONG NUMBER HUNDRED MILLIONS", 0x00, "Pahawh_Hmong"),
    c(0x16B60, None, "PAHAWH HMONG NUMBER TEN BILLIONS", 0x00, "Pahawh_Hmong"),
    c(0x16B61, None, "PAHAWH HMONG NUMBER TRILLIONS", 0x00, "Pahawh_Hmong"),
    c(0x16B63, None, "PAHAWH HMONG SIGN VOS LUB", 0x31, "Pahawh_Hmong"),
    c(0x16B64, None, "PAHAWH HMONG SIGN XYOO", 0x31, "Pahawh_Hmong"),
    c(0x16B65, None, "PAHAWH HMONG SIGN HLI", 0x31, "Pahawh_Hmong"),
    c(0x16B66, None, "PAHAWH HMONG SIGN THIRD-STAGE HLI", 0x31, "Pahawh_Hmong"),
    c(0x16B67, None, "PAHAWH HMONG SIGN ZWJ THAJ", 0x31, "Pahawh_Hmong"),
    c(0x16B68, None, "PAHAWH HMONG SIGN HNUB", 0x31, "Pahawh_Hmong"),
    c(0x16B69, None, "PAHAWH HMONG SIGN NQIG", 0x31, "Pahawh_Hmong"),
    c(0x16B6A, None, "PAHAWH HMONG SIGN XIAB", 0x31, "Pahawh_Hmong"),
    c(0x16B6B, None, "PAHAWH HMONG SIGN NTUJ", 0x31, "Pahawh_Hmong"),
    c(0x16B6C, None, "PAHAWH HMONG SIGN AV", 0x31, "Pahawh_Hmong"),
    c(0x16B6D, None, "PAHAWH HMONG SIGN TXHEEJ CEEV", 0x31, "Pahawh_Hmong"),
    c(0x16B6E, None, "PAHAWH HMONG SIGN MEEJ TSEEB", 0x31, "Pahawh_Hmong"),
    c(0x16B6F, None, "PAHAWH HMONG SIGN TAU", 0x31, "Pahawh_Hmong"),
    c(0x16B70, None, "PAHAWH HMONG SIGN LOS", 0x31, "Pahawh_Hmong"),
    c(0x16B71, None, "PAHAWH HMONG SIGN MUS", 0x31, "Pahawh_Hmong"),
    c(0x16B72, None, "PAHAWH HMONG SIGN CIM HAIS LUS NTOG NTOG", 0x31, "Pahawh_Hmong"),
    c(0x16B73, None, "PAHAWH HMONG SIGN CIM CUAM TSHOOJ", 0x31, "Pahawh_Hmong"),
    c(0x16B74, None, "PAHAWH HMONG SIGN CIM TXWV", 0x31, "Pahawh_Hmong"),
    c(0x16B75, None, "PAHAWH HMONG SIGN CIM TXWV CHWV", 0x31, "Pahawh_Hmong"),
    c(0x16B76, None, "PAHAWH HMONG SIGN CIM PUB DAWB", 0x31, "Pahawh_Hmong"),
    c(0x16B77, None, "PAHAWH HMONG SIGN CIM NRES TOS", 0x31, "Pahawh_Hmong"),
    c(0x16B7D, None, "PAHAWH HMONG CLAN SIGN TSHEEJ", 0x31, "Pahawh_Hmong"),
    c(0x16B7E, None, "PAHAWH HMONG CLAN SIGN YEEG", 0x31, "Pahawh_Hmong"),
    c(0x16B7F, None, "PAHAWH HMONG CLAN SIGN LIS", 0x31, "Pahawh_Hmong"),
    c(0x16B80, None, "PAHAWH HMONG CLAN SIGN LAUJ", 0x31, "Pahawh_Hmong"),
    c(0x16B81, None, "PAHAWH HMONG CLAN SIGN XYOOJ", 0x31, "Pahawh_Hmong"),
    c(0x16B82, None, "PAHAWH HMONG CLAN SIGN KOO", 0x31, "Pahawh_Hmong"),
    c(0x16B83, None, "PAHAWH HMONG CLAN SIGN HAWJ", 0x31, "Pahawh_Hmong"),
    c(0x16B84, None, "PAHAWH HMONG CLAN SIGN MUAS", 0x31, "Pahawh_Hmong"),
    c(0x16B85, None, "PAHAWH HMONG CLAN SIGN THOJ", 0x31, "Pahawh_Hmong"),
    c(0x16B86, None, "PAHAWH HMONG CLAN SIGN TSAB", 0x31, "Pahawh_Hmong"),
    c(0x16B87, None, "PAHAWH HMONG CLAN SIGN PHAB", 0x31, "Pahawh_Hmong"),
    c(0x16B88, None, "PAHAWH HMONG CLAN SIGN KHAB", 0x31, "Pahawh_Hmong"),
    c(0x16B89, None, "PAHAWH HMONG CLAN SIGN HAM", 0x31, "Pahawh_Hmong"),
    c(0x16B8A, None, "PAHAWH HMONG CLAN SIGN VAJ", 0x31, "Pahawh_Hmong"),
    c(0x16B8B, None, "PAHAWH HMONG CLAN SIGN FAJ", 0x31, "Pahawh_Hmong"),
    c(0x16B8C, None, "PAHAWH HMONG CLAN SIGN YAJ", 0x31, "Pahawh_Hmong"),
    c(0x16B8D, None, "PAHAWH HMONG CLAN SIGN TSWB", 0x31, "Pahawh_Hmong"),
    c(0x16B8E, None, "PAHAWH HMONG CLAN SIGN KWM", 0x31, "Pahawh_Hmong"),
    c(0x16B8F, None, "PAHAWH HMONG CLAN SIGN VWJ", 0x31, "Pahawh_Hmong"),
    c(0x16E40, None, "MEDEFAIDRIN CAPITAL LETTER M", 0x31, "Medefaidrin"),
    c(0x16E41, None, "MEDEFAIDRIN CAPITAL LETTER S", 0x31, "Medefaidrin"),
    c(0x16E42, None, "MEDEFAIDRIN CAPITAL LETTER V", 0x31, "Medefaidrin"),
    c(0x16E43, None, "MEDEFAIDRIN CAPITAL LETTER W", 0x31, "Medefaidrin"),
    c(0x16E44, None, "MEDEFAIDRIN CAPITAL LETTER ATIU", 0x31, "Medefaidrin"),
    c(0x16E45, None, "MEDEFAIDRIN CAPITAL LETTER Z", 0x31, "Medefaidrin"),
    c(0x16E46, None, "MEDEFAIDRIN CAPITAL LETTER KP", 0x31, "Medefaidrin"),
    c(0x16E47, None, "MEDEFAIDRIN CAPITAL LETTER P", 0x31, "Medefaidrin"),
    c(0x16E48, None, "MEDEFAIDRIN CAPITAL LETTER T", 0x31, "Medefaidrin"),
    c(0x16E49, None, "MEDEFAIDRIN CAPITAL LETTER G", 0x31, "Medefaidrin"),
    c(0x16E4A, None, "MEDEFAIDRIN CAPITAL LETTER F", 0x31, "Medefaidrin"),
    c(0x16E4B, None, "MEDEFAIDRIN CAPITAL LETTER I", 0x31, "Medefaidrin"),
    c(0x16E4C, None, "MEDEFAIDRIN CAPITAL LETTER K", 0x31, "Medefaidrin"),
    c(0x16E4D, None, "MEDEFAIDRIN CAPITAL LETTER A", 0x31, "Medefaidrin"),
    c(0x16E4E, None, "MEDEFAIDRIN CAPITAL LETTER J", 0x31, "Medefaidrin"),
    c(0x16E4F, None, "MEDEFAIDRIN CAPITAL LETTER E", 0x31, "Medefaidrin"),
    c(0x16E50, None, "MEDEFAIDRIN CAPITAL LETTER B", 0x31, "Medefaidrin"),
    c(0x16E51, None, "MEDEFAIDRIN CAPITAL LETTER C", 0x31, "Medefaidrin"),
    c(0x16E52, None, "MEDEFAIDRIN CAPITAL LETTER U", 0x31, "Medefaidrin"),
    c(0x16E53, None, "MEDEFAIDRIN CAPITAL LETTER YU", 0x31, "Medefaidrin"),
    c(0x16E54, None, "MEDEFAIDRIN CAPITAL LETTER L", 0x31, "Medefaidrin"),
    c(0x16E55, None, "MEDEFAIDRIN CAPITAL LETTER Q", 0x31, "Medefaidrin"),
    c(0x16E56, None, "MEDEFAIDRIN CAPITAL LETTER H", 0x31, "Medefaidrin"),
    c(0x16E57, None, "MEDEFAIDRIN CAPITAL LETTER NG", 0x31, "Medefaidrin"),
    c(0x16E58, None, "MEDEFAIDRIN CAPITAL LETTER X", 0x31, "Medefaidrin"),
    c(0x16E59, None, "MEDEFAIDRIN CAPITAL LETTER D", 0x31, "Medefaidrin"),
    c(0x16E5A, None, "MEDEFAIDRIN CAPITAL LETTER OE", 0x31, "Medefaidrin"),
    c(0x16E5B, None, "MEDEFAIDRIN CAPITAL LETTER N", 0x31, "Medefaidrin"),
    c(0x16E5C, None, "MEDEFAIDRIN CAPITAL LETTER R", 0x31, "Medefaidrin"),
    c(0x16E5D, None, "MEDEFAIDRIN CAPITAL LETTER O", 0x31, "Medefaidrin"),
    c(0x16E5E, None, "MEDEFAIDRIN CAPITAL LETTER AI", 0x31, "Medefaidrin"),
    c(0x16E5F, None, "MEDEFAIDRIN CAPITAL LETTER Y", 0x31, "Medefaidrin"),
    c(0x16E60, None, "MEDEFAIDRIN SMALL LETTER M", 0x31, "Medefaidrin"),
    c(0x16E61, None, "MEDEFAIDRIN SMALL LETTER S", 0x31, "Medefaidrin"),
    c(0x16E62, None, "MEDEFAIDRIN SMALL LETTER V", 0x31, "Medefaidrin"),
    c(0x16E63, None, "MEDEFAIDRIN SMALL LETTER W", 0x31, "Medefaidrin"),
    c(0x16E64, None, "MEDEFAIDRIN SMALL LETTER ATIU", 0x31, "Medefaidrin"),
    c(0x16E65, None, "MEDEFAIDRIN SMALL LETTER Z", 0x31, "Medefaidrin"),
    c(0x16E66, None, "MEDEFAIDRIN SMALL LETTER KP", 0x31, "Medefaidrin"),
    c(0x16E67, None, "MEDEFAIDRIN SMALL LETTER P", 0x31, "Medefaidrin"),
    c(0x16E68, None, "MEDEFAIDRIN SMALL LETTER T", 0x31, "Medefaidrin"),
    c(0x16E69, None, "MEDEFAIDRIN SMALL LETTER G", 0x31, "Medefaidrin"),
    c(0x16E6A, None, "MEDEFAIDRIN SMALL LETTER F", 0x31, "Medefaidrin"),
    c(0x16E6B, None, "MEDEFAIDRIN SMALL LETTER I", 0x31, "Medefaidrin"),
    c(0x16E6C, None, "MEDEFAIDRIN SMALL LETTER K", 0x31, "Medefaidrin"),
    c(0x16E6D, None, "MEDEFAIDRIN SMALL LETTER A", 0x31, "Medefaidrin"),
    c(0x16E6E, None, "MEDEFAIDRIN SMALL LETTER J", 0x31, "Medefaidrin"),
    c(0x16E6F, None, "MEDEFAIDRIN SMALL LETTER E", 0x31, "Medefaidrin"),
    c(0x16E70, None, "MEDEFAIDRIN SMALL LETTER B", 0x31, "Medefaidrin"),
    c(0x16E71, None, "MEDEFAIDRIN SMALL LETTER C", 0x31, "Medefaidrin"),
    c(0x16E72, None, "MEDEFAIDRIN SMALL LETTER U", 0x31, "Medefaidrin"),
    c(0x16E73, None, "MEDEFAIDRIN SMALL LETTER YU", 0x31, "Medefaidrin"),
    c(0x16E74, None, "MEDEFAIDRIN SMALL LETTER L", 0x31, "Medefaidrin"),
    c(0x16E75, None, "MEDEFAIDRIN SMALL LETTER Q", 0x31, "Medefaidrin"),
    c(0x16E76, None, "MEDEFAIDRIN SMALL LETTER H", 0x31, "Medefaidrin"),
    c(0x16E77, None, "MEDEFAIDRIN SMALL LETTER NG", 0x31, "Medefaidrin"),
    c(0x16E78, None, "MEDEFAIDRIN SMALL LETTER X", 0x31, "Medefaidrin"),
    c(0x16E79, None, "MEDEFAIDRIN SMALL LETTER D", 0x31, "Medefaidrin"),
    c(0x16E7A, None, "MEDEFAIDRIN SMALL LETTER OE", 0x31, "Medefaidrin"),
    c(0x16E7B, None, "MEDEFAIDRIN SMALL LETTER N", 0x31, "Medefaidrin"),
    c(0x16E7C, None, "MEDEFAIDRIN SMALL LETTER R", 0x31, "Medefaidrin"),
    c(0x16E7D, None, "MEDEFAIDRIN SMALL LETTER O", 0x31, "Medefaidrin"),
    c(0x16E7E, None, "MEDEFAIDRIN SMALL LETTER AI", 0x31, "Medefaidrin"),
    c(0x16E7F, None, "MEDEFAIDRIN SMALL LETTER Y", 0x31, "Medefaidrin"),
    c(0x16E80, None, "MEDEFAIDRIN DIGIT ZERO", 0x00, "Medefaidrin"),
    c(0x16E81, None, "MEDEFAIDRIN DIGIT ONE", 0x00, "Medefaidrin"),
    c(0x16E82, None, "MEDEFAIDRIN DIGIT TWO", 0x00, "Medefaidrin"),
    c(0x16E83, None, "MEDEFAIDRIN DIGIT THREE", 0x00, "Medefaidrin"),
    c(0x16E84, None, "MEDEFAIDRIN DIGIT FOUR", 0x00, "Medefaidrin"),
    c(0x16E85, None, "MEDEFAIDRIN DIGIT FIVE", 0x00, "Medefaidrin"),
    c(0x16E86, None, "MEDEFAIDRIN DIGIT SIX", 0x00, "Medefaidrin"),
    c(0x16E87, None, "MEDEFAIDRIN DIGIT SEVEN", 0x00, "Medefaidrin"),
    c(0x16E88, None, "MEDEFAIDRIN DIGIT EIGHT", 0x00, "Medefaidrin"),
    c(0x16E89, None, "MEDEFAIDRIN DIGIT NINE", 0x00, "Medefaidrin"),
    c(0x16E8A, None, "MEDEFAIDRIN NUMBER TEN", 0x00, "Medefaidrin"),
    c(0x16E8B, None, "MEDEFAIDRIN NUMBER ELEVEN", 0x00, "Medefaidrin"),
    c(0x16E8C, None, "MEDEFAIDRIN NUMBER TWELVE", 0x00, "Medefaidrin"),
    c(0x16E8D, None, "MEDEFAIDRIN NUMBER THIRTEEN", 0x00, "Medefaidrin"),
    c(0x16E8E, None, "MEDEFAIDRIN NUMBER FOURTEEN", 0x00, "Medefaidrin"),
    c(0x16E8F, None, "MEDEFAIDRIN NUMBER FIFTEEN", 0x00, "Medefaidrin"),
    c(0x16E90, None, "MEDEFAIDRIN NUMBER SIXTEEN", 0x00, "Medefaidrin"),
    c(0x16E91, None, "MEDEFAIDRIN NUMBER SEVENTEEN", 0x00, "Medefaidrin"),
    c(0x16E92, None, "MEDEFAIDRIN NUMBER EIGHTEEN", 0x00, "Medefaidrin"),
    c(0x16E93, None, "MEDEFAIDRIN NUMBER NINETEEN", 0x00, "Medefaidrin"),
    c(0x16E94, None, "MEDEFAIDRIN DIGIT ONE ALTERNATE FORM", 0x00, "Medefaidrin"),
    c(0x16E95, None, "MEDEFAIDRIN DIGIT TWO ALTERNATE FORM", 0x00, "Medefaidrin"),
    c(0x16E96, None, "MEDEFAIDRIN DIGIT THREE ALTERNATE FORM", 0x00, "Medefaidrin"),
    c(0x16E97, None, "MEDEFAIDRIN COMMA", 0x00, "Medefaidrin"),
    c(0x16E98, None, "MEDEFAIDRIN FULL STOP", 0x00, "Medefaidrin"),
    c(0x16E99, None, "MEDEFAIDRIN SYMBOL AIVA", 0x00, "Medefaidrin"),
    c(0x16E9A, None, "MEDEFAIDRIN EXCLAMATION OH", 0x00, "Medefaidrin"),
    c(0x16F00, None, "MIAO LETTER PA", 0x31, "Miao"),
    c(0x16F01, None, "MIAO LETTER BA", 0x31, "Miao"),
    c(0x16F02, None, "MIAO LETTER YI PA", 0x31, "Miao"),
    c(0x16F03, None, "MIAO LETTER PLA", 0x31, "Miao"),
    c(0x16F04, None, "MIAO LETTER MA", 0x31, "Miao"),
    c(0x16F05, None, "MIAO LETTER MHA", 0x31, "Miao"),
    c(0x16F06, None, "MIAO LETTER ARCHAIC MA", 0x31, "Miao"),
    c(0x16F07, None, "MIAO LETTER FA", 0x31, "Miao"),
    c(0x16F08, None, "MIAO LETTER VA", 0x31, "Miao"),
    c(0x16F09, None, "MIAO LETTER VFA", 0x31, "Miao"),
    c(0x16F0A, None, "MIAO LETTER TA", 0x31, "Miao"),
    c(0x16F0B, None, "MIAO LETTER DA", 0x31, "Miao"),
    c(0x16F0C, None, "MIAO LETTER YI TTA", 0x31, "Miao"),
    c(0x16F0D, None, "MIAO LETTER YI TA", 0x31, "Miao"),
    c(0x16F0E, None, "MIAO LETTER TTA", 0x31, "Miao"),
    c(0x16F0F, None, "MIAO LETTER DDA", 0x31, "Miao"),
    c(0x16F10, None, "MIAO LETTER NA", 0x31, "Miao"),
    c(0x16F11, None, "MIAO LETTER NHA", 0x31, "Miao"),
    c(0x16F12, None, "MIAO LETTER YI NNA", 0x31, "Miao"),
    c(0x16F13, None, "MIAO LETTER ARCHAIC NA", 0x31, "Miao"),
    c(0x16F14, None, "MIAO LETTER NNA", 0x31, "Miao"),
    c(0x16F15, None, "MIAO LETTER NNHA", 0x31, "Miao"),
    c(0x16F16, None, "MIAO LETTER LA", 0x31, "Miao"),
    c(0x16F17, None, "MIAO LETTER LYA", 0x31, "Miao"),
    c(0x16F18, None, "MIAO LETTER LHA", 0x31, "Miao"),
    c(0x16F19, None, "MIAO LETTER LHYA", 0x31, "Miao"),
    c(0x16F1A, None, "MIAO LETTER TLHA", 0x31, "Miao"),
    c(0x16F1B, None, "MIAO LETTER DLHA", 0x31, "Miao"),
    c(0x16F1C, None, "MIAO LETTER TLHYA", 0x31, "Miao"),
    c(0x16F1D, None, "MIAO LETTER DLHYA", 0x31, "Miao"),
    c(0x16F1E, None, "MIAO LETTER KA", 0x31, "Miao"),
    c(0x16F1F, None, "MIAO LETTER GA", 0x31, "Miao"),
    c(0x16F20, None, "MIAO LETTER YI KA", 0x31, "Miao"),
    c(0x16F21, None, "MIAO LETTER QA", 0x31, "Miao"),
    c(0x16F22, None, "MIAO LETTER QGA", 0x31, "Miao"),
    c(0x16F23, None, "MIAO LETTER NGA", 0x31, "Miao"),
    c(0x16F24, None, "MIAO LETTER NGHA", 0x31, "Miao"),
    c(0x16F25, None, "MIAO LETTER ARCHAIC NGA", 0x31, "Miao"),
    c(0x16F26, None, "MIAO LETTER HA", 0x31, "Miao"),
    c(0x16F27, None, "MIAO LETTER XA", 0x31, "Miao"),
    c(0x16F28, None, "MIAO LETTER GHA", 0x31, "Miao"),
    c(0x16F29, None, "MIAO LETTER GHHA", 0x31, "Miao"),
    c(0x16F2A, None, "MIAO LETTER TSSA", 0x31, "Miao"),
    c(0x16F2B, None, "MIAO LETTER DZZA", 0x31, "Miao"),
    c(0x16F2C, None, "MIAO LETTER NYA", 0x31, "Miao"),
    c(0x16F2D, None, "MIAO LETTER NYHA", 0x31, "Miao"),
    c(0x16F2E, None, "MIAO LETTER TSHA", 0x31, "Miao"),
    c(0x16F2F, None, "MIAO LETTER DZHA", 0x31, "Miao"),
    c(0x16F30, None, "MIAO LETTER YI TSHA", 0x31, "Miao"),
    c(0x16F31, None, "MIAO LETTER YI DZHA", 0x31, "Miao"),
    c(0x16F32, None, "MIAO LETTER REFORMED TSHA", 0x31, "Miao"),
    c(0x16F33, None, "MIAO LETTER SHA", 0x31, "Miao"),
    c(0x16F34, None, "MIAO LETTER SSA", 0x31, "Miao"),
    c(0x16F35, None, "MIAO LETTER ZHA", 0x31, "Miao"),
    c(0x16F36, None, "MIAO LETTER ZSHA", 0x31, "Miao"),
    c(0x16F37, None, "MIAO LETTER TSA", 0x31, "Miao"),
    c(0x16F38, None, "MIAO LETTER DZA", 0x31, "Miao"),
    c(0x16F39, None, "MIAO LETTER YI TSA", 0x31, "Miao"),
    c(0x16F3A, None, "MIAO LETTER SA", 0x31, "Miao"),
    c(0x16F3B, None, "MIAO LETTER ZA", 0x31, "Miao"),
    c(0x16F3C, None, "MIAO LETTER ZSA", 0x31, "Miao"),
    c(0x16F3D, None, "MIAO LETTER ZZA", 0x31, "Miao"),
    c(0x16F3E, None, "MIAO LETTER ZZSA", 0x31, "Miao"),
    c(0x16F3F, None, "MIAO LETTER ARCHAIC ZZA", 0x31, "Miao"),
    c(0x16F40, None, "MIAO LETTER ZZYA", 0x31, "Miao"),
    c(0x16F41, None, "MIAO LETTER ZZSYA", 0x31, "Miao"),
    c(0x16F42, None, "MIAO LETTER WA", 0x31, "Miao"),
    c(0x16F43, None, "MIAO LETTER AH", 0x31, "Miao"),
    c(0x16F44, None, "MIAO LETTER HHA", 0x31, "Miao"),
    c(0x16F45, None, "MIAO LETTER BRI", 0x31, "Miao"),
    c(0x16F46, None, "MIAO LETTER SYI", 0x31, "Miao"),
    c(0x16F47, None, "MIAO LETTER DZYI", 0x31, "Miao"),
    c(0x16F48, None, "MIAO LETTER TE", 0x31, "Miao"),
    c(0x16F49, None, "MIAO LETTER TSE", 0x31, "Miao"),
    c(0x16F4A, None, "MIAO LETTER RTE", 0x31, "Miao"),
    c(0x16F4F, None, "MIAO SIGN CONSONANT MODIFIER BAR", 0x21, "Miao"),
    c(0x16F50, None, "MIAO LETTER NASALIZATION", 0x31, "Miao"),
    c(0x16F51, None, "MIAO SIGN ASPIRATION", 0x21, "Miao"),
    c(0x16F52, None, "MIAO SIGN REFORMED VOICING", 0x21, "Miao"),
    c(0x16F53, None, "MIAO SIGN REFORMED ASPIRATION", 0x21, "Miao"),
    c(0x16F54, None, "MIAO VOWEL SIGN A", 0x21, "Miao"),
    c(0x16F55, None, "MIAO VOWEL SIGN AA", 0x21, "Miao"),
    c(0x16F56, None, "MIAO VOWEL SIGN AHH", 0x21, "Miao"),
    c(0x16F57, None, "MIAO VOWEL SIGN AN", 0x21, "Miao"),
    c(0x16F58, None, "MIAO VOWEL SIGN ANG", 0x21, "Miao"),
    c(0x16F59, None, "MIAO VOWEL SIGN O", 0x21, "Miao"),
    c(0x16F5A, None, "MIAO VOWEL SIGN OO", 0x21, "Miao"),
    c(0x16F5B, None, "MIAO VOWEL SIGN WO", 0x21, "Miao"),
    c(0x16F5C, None, "MIAO VOWEL SIGN W", 0x21, "Miao"),
    c(0x16F5D, None, "MIAO VOWEL SIGN E", 0x21, "Miao"),
    c(0x16F5E, None, "MIAO VOWEL SIGN EN", 0x21, "Miao"),
    c(0x16F5F, None, "MIAO VOWEL SIGN ENG", 0x21, "Miao"),
    c(0x16F60, None, "MIAO VOWEL SIGN OEY", 0x21, "Miao"),
    c(0x16F61, None, "MIAO VOWEL SIGN I", 0x21, "Miao"),
    c(0x16F62, None, "MIAO VOWEL SIGN IA", 0x21, "Miao"),
    c(0x16F63, None, "MIAO VOWEL SIGN IAN", 0x21, "Miao"),
    c(0x16F64, None, "MIAO VOWEL SIGN IANG", 0x21, "Miao"),
    c(0x16F65, None, "MIAO VOWEL SIGN IO", 0x21, "Miao"),
    c(0x16F66, None, "MIAO VOWEL SIGN IE", 0x21, "Miao"),
    c(0x16F67, None, "MIAO VOWEL SIGN II", 0x21, "Miao"),
    c(0x16F68, None, "MIAO VOWEL SIGN IU", 0x21, "Miao"),
    c(0x16F69, None, "MIAO VOWEL SIGN ING", 0x21, "Miao"),
    c(0x16F6A, None, "MIAO VOWEL SIGN U", 0x21, "Miao"),
    c(0x16F6B, None, "MIAO VOWEL SIGN UA", 0x21, "Miao"),
    c(0x16F6C, None, "MIAO VOWEL SIGN UAN", 0x21, "Miao"),
    c(0x16F6D, None, "MIAO VOWEL SIGN UANG", 0x21, "Miao"),
    c(0x16F6E, None, "MIAO VOWEL SIGN UU", 0x21, "Miao"),
    c(0x16F6F, None, "MIAO VOWEL SIGN UEI", 0x21, "Miao"),
    c(0x16F70, None, "MIAO VOWEL SIGN UNG", 0x21, "Miao"),
    c(0x16F71, None, "MIAO VOWEL SIGN Y", 0x21, "Miao"),
    c(0x16F72, None, "MIAO VOWEL SIGN YI", 0x21, "Miao"),
    c(0x16F73, None, "MIAO VOWEL SIGN AE", 0x21, "Miao"),
    c(0x16F74, None, "MIAO VOWEL SIGN AEE", 0x21, "Miao"),
    c(0x16F75, None, "MIAO VOWEL SIGN ERR", 0x21, "Miao"),
    c(0x16F76, None, "MIAO VOWEL SIGN ROUNDED ERR", 0x21, "Miao"),
    c(0x16F77, None, "MIAO VOWEL SIGN ER", 0x21, "Miao"),
    c(0x16F78, None, "MIAO VOWEL SIGN ROUNDED ER", 0x21, "Miao"),
    c(0x16F79, None, "MIAO VOWEL SIGN AI", 0x21, "Miao"),
    c(0x16F7A, None, "MIAO VOWEL SIGN EI", 0x21, "Miao"),
    c(0x16F7B, None, "MIAO VOWEL SIGN AU", 0x21, "Miao"),
    c(0x16F7C, None, "MIAO VOWEL SIGN OU", 0x21, "Miao"),
    c(0x16F7D, None, "MIAO VOWEL SIGN N", 0x21, "Miao"),
    c(0x16F7E, None, "MIAO VOWEL SIGN NG", 0x21, "Miao"),
    c(0x16F7F, None, "MIAO VOWEL SIGN UOG", 0x21, "Miao"),
    c(0x16F80, None, "MIAO VOWEL SIGN YUI", 0x21, "Miao"),
    c(0x16F81, None, "MIAO VOWEL SIGN OG", 0x21, "Miao"),
    c(0x16F82, None, "MIAO VOWEL SIGN OER", 0x21, "Miao"),
    c(0x16F83, None, "MIAO VOWEL SIGN VW", 0x21, "Miao"),
    c(0x16F84, None, "MIAO VOWEL SIGN IG", 0x21, "Miao"),
    c(0x16F85, None, "MIAO VOWEL SIGN EA", 0x21, "Miao"),
    c(0x16F86, None, "MIAO VOWEL SIGN IONG", 0x21, "Miao"),
    c(0x16F87, None, "MIAO VOWEL SIGN UI", 0x21, "Miao"),
    c(0x16F8F, None, "MIAO TONE RIGHT", 0x21, "Miao"),
    c(0x16F90, None, "MIAO TONE TOP RIGHT", 0x21, "Miao"),
    c(0x16F91, None, "MIAO TONE ABOVE", 0x21, "Miao"),
    c(0x16F92, None, "MIAO TONE BELOW", 0x21, "Miao"),
    c(0x16F93, None, "MIAO LETTER TONE-2", 0x31, "Miao"),
    c(0x16F94, None, "MIAO LETTER TONE-3", 0x31, "Miao"),
    c(0x16F95, None, "MIAO LETTER TONE-4", 0x31, "Miao"),
    c(0x16F96, None, "MIAO LETTER TONE-5", 0x31, "Miao"),
    c(0x16F97, None, "MIAO LETTER TONE-6", 0x31, "Miao"),
    c(0x16F98, None, "MIAO LETTER TONE-7", 0x31, "Miao"),
    c(0x16F99, None, "MIAO LETTER TONE-8", 0x31, "Miao"),
    c(0x16F9A, None, "MIAO LETTER REFORMED TONE-1", 0x31, "Miao"),
    c(0x16F9B, None, "MIAO LETTER REFORMED TONE-2", 0x31, "Miao"),
    c(0x16F9C, None, "MIAO LETTER REFORMED TONE-4", 0x31, "Miao"),
    c(0x16F9D, None, "MIAO LETTER REFORMED TONE-5", 0x31, "Miao"),
    c(0x16F9E, None, "MIAO LETTER REFORMED TONE-6", 0x31, "Miao"),
    c(0x16F9F, None, "MIAO LETTER REFORMED TONE-8", 0x31, "Miao"),
    c(0x16FE0, None, "TANGUT ITERATION MARK", 0x31, "Ideographic_Symbols"),
    c(0x16FE1, None, "NUSHU ITERATION MARK", 0x31, "Ideographic_Symbols"),
    c(0x16FE2, None, "OLD CHINESE HOOK MARK", 0x00, "Ideographic_Symbols"),
    c(0x16FE3, None, "OLD CHINESE ITERATION MARK", 0x31, "Ideographic_Symbols"),
    c(0x16FE4, None, "KHITAN SMALL SCRIPT FILLER", 0x20, "Ideographic_Symbols"),
    c(0x16FF0, None, "VIETNAMESE ALTERNATE READING MARK CA", 0x21, "Ideographic_Symbols"),
    c(0x16FF1, None, "VIETNAMESE ALTERNATE READING MARK NHAY", 0x21, "Ideographic_Symbols"),
    c(0x17000, Some(0x187F7), "TANGUT IDEOGRAPH-#", 0x31, "Tangut"),
    c(0x18800, None, "TANGUT COMPONENT-001", 0x31, "Tangut_Components"),
    c(0x18801, None, "TANGUT COMPONENT-002", 0x31, "Tangut_Components"),
    c(0x18802, None, "TANGUT COMPONENT-003", 0x31, "Tangut_Components"),
    c(0x18803, None, "TANGUT COMPONENT-004", 0x31, "Tangut_Components"),
    c(0x18804, None, "TANGUT COMPONENT-005", 0x31, "Tangut_Components"),
    c(0x18805, None, "TANGUT COMPONENT-006", 0x31, "Tangut_Components"),
    c(0x18806, None, "TANGUT COMPONENT-007", 0x31, "Tangut_Components"),
    c(0x18807, None, "TANGUT COMPONENT-008", 0x31, "Tangut_Components"),
    c(0x18808, None, "TANGUT COMPONENT-009", 0x31, "Tangut_Components"),
    c(0x18809, None, "TANGUT COMPONENT-010", 0x31, "Tangut_Components"),
    c(0x1880A, None, "TANGUT COMPONENT-011", 0x31, "Tangut_Components"),
    c(0x1880B, None, "TANGUT COMPONENT-012", 0x31, "Tangut_Components"),
    c(0x1880C, None, "TANGUT COMPONENT-013", 0x31, "Tangut_Components"),
    c(0x1880D, None, "TANGUT COMPONENT-014", 0x31, "Tangut_Components"),
    c(0x1880E, None, "TANGUT COMPONENT-015", 0x31, "Tangut_Components"),
    c(0x1880F, None, "TANGUT COMPONENT-016", 0x31, "Tangut_Components"),
    c(0x18810, None, "TANGUT COMPONENT-017", 0x31, "Tangut_Components"),
    c(0x18811, None, "TANGUT COMPONENT-018", 0x31, "Tangut_Components"),
    c(0x18812, None, "TANGUT COMPONENT-019", 0x31, "Tangut_Components"),
    c(0x18813, None, "TANGUT COMPONENT-020", 0x31, "Tangut_Components"),
    c(0x18814, None, "TANGUT COMPONENT-021", 0x31, "Tangut_Components"),
    c(0x18815, None, "TANGUT COMPONENT-022", 0x31, "Tangut_Components"),
    c(0x18816, None, "TANGUT COMPONENT-023", 0x31, "Tangut_Components"),
    c(0x18817, None, "TANGUT COMPONENT-024", 0x31, "Tangut_Components"),
    c(0x18818, None, "TANGUT COMPONENT-025", 0x31, "Tangut_Components"),
    c(0x18819, None, "TANGUT COMPONENT-026", 0x31, "Tangut_Components"),
    c(0x1881A, None, "TANGUT COMPONENT-027", 0x31, "Tangut_Components"),
    c(0x1881B, None, "TANGUT COMPONENT-028", 0x31, "Tangut_Components"),
    c(0x1881C, None, "TANGUT COMPONENT-029", 0x31, "Tangut_Components"),
    c(0x1881D, None, "TANGUT COMPONENT-030", 0x31, "Tangut_Components"),
    c(0x1881E, None, "TANGUT COMPONENT-031", 0x31, "Tangut_Components"),
    c(0x1881F, None, "TANGUT COMPONENT-032", 0x31, "Tangut_Components"),
    c(0x18820, None, "TANGUT COMPONENT-033", 0x31, "Tangut_Components"),
    c(0x18821, None, "TANGUT COMPONENT-034", 0x31, "Tangut_Components"),
    c(0x18822, None, "TANGUT COMPONENT-035", 0x31, "Tangut_Components"),
    c(0x18823, None, "TANGUT COMPONENT-036", 0x31, "Tangut_Components"),
    c(0x18824, None, "TANGUT COMPONENT-037", 0x31, "Tangut_Components"),
    c(0x18825, None, "TANGUT COMPONENT-038", 0x31, "Tangut_Components"),
    c(0x18826, None, "TANGUT COMPONENT-039", 0x31, "Tangut_Components"),
    c(0x18827, None, "TANGUT COMPONENT-040", 0x31, "Tangut_Components"),
    c(0x18828, None, "TANGUT COMPONENT-041", 0x31, "Tangut_Components"),
    c(0x18829, None, "TANGUT COMPONENT-042", 0x31, "Tangut_Components"),
    c(0x1882A, None, "TANGUT COMPONENT-043", 0x31, "Tangut_Components"),
    c(0x1882B, None, "TANGUT COMPONENT-044", 0x31, "Tangut_Components"),
    c(0x1882C, None, "TANGUT COMPONENT-045", 0x31, "Tangut_Components"),
    c(0x1882D, None, "TANGUT COMPONENT-046", 0x31, "Tangut_Components"),
    c(0x1882E, None, "TANGUT COMPONENT-047", 0x31, "Tangut_Components"),
    c(0x1882F, None, "TANGUT COMPONENT-048", 0x31, "Tangut_Components"),
    c(0x18830, None, "TANGUT COMPONENT-049", 0x31, "Tangut_Components"),
    c(0x18831, None, "TANGUT COMPONENT-050", 0x31, "Tangut_Components"),
    c(0x18832, None, "TANGUT COMPONENT-051", 0x31, "Tangut_Components"),
    c(0x18833, None, "TANGUT COMPONENT-052", 0x31, "Tangut_Components"),
    c(0x18834, None, "TANGUT COMPONENT-053", 0x31, "Tangut_Components"),
    c(0x18835, None, "TANGUT COMPONENT-054", 0x31, "Tangut_Components"),
    c(0x18836, None, "TANGUT COMPONENT-055", 0x31, "Tangut_Components"),
    c(0x18837, None, "TANGUT COMPONENT-056", 0x31, "Tangut_Components"),
    c(0x18838, None, "TANGUT COMPONENT-057", 0x31, "Tangut_Components"),
    c(0x18839, None, "TANGUT COMPONENT-058", 0x31, "Tangut_Components"),
    c(0x1883A, None, "TANGUT COMPONENT-059", 0x31, "Tangut_Components"),
    c(0x1883B, None, "TANGUT COMPONENT-060", 0x31, "Tangut_Components"),
    c(0x1883C, None, "TANGUT COMPONENT-061", 0x31, "Tangut_Components"),
    c(0x1883D, None, "TANGUT COMPONENT-062", 0x31, "Tangut_Components"),
    c(0x1883E, None, "TANGUT COMPONENT-063", 0x31, "Tangut_Components"),
    c(0x1883F, None, "TANGUT COMPONENT-064", 0x31, "Tangut_Components"),
    c(0x18840, None, "TANGUT COMPONENT-065", 0x31, "Tangut_Components"),
    c(0x18841, None, "TANGUT COMPONENT-066", 0x31, "Tangut_Components"),
    c(0x18842, None, "TANGUT COMPONENT-067", 0x31, "Tangut_Components"),
    c(0x18843, None, "TANGUT COMPONENT-068", 0x31, "Tangut_Components"),
    c(0x18844, None, "TANGUT COMPONENT-069", 0x31, "Tangut_Components"),
    c(0x18845, None, "TANGUT COMPONENT-070", 0x31, "Tangut_Components"),
    c(0x18846, None, "TANGUT COMPONENT-071", 0x31, "Tangut_Components"),
    c(0x18847, None, "TANGUT COMPONENT-072", 0x31, "Tangut_Components"),
    c(0x18848, None, "TANGUT COMPONENT-073", 0x31, "Tangut_Components"),
    c(0x18849, None, "TANGUT COMPONENT-074", 0x31, "Tangut_Components"),
    c(0x1884A, None, "TANGUT COMPONENT-075", 0x31, "Tangut_Components"),
    c(0x1884B, None, "TANGUT COMPONENT-076", 0x31, "Tangut_Components"),
    c(0x1884C, None, "TANGUT COMPONENT-077", 0x31, "Tangut_Components"),
    c(0x1884D, None, "TANGUT COMPONENT-078", 0x31, "Tangut_Components"),
    c(0x1884E, None, "TANGUT COMPONENT-079", 0x31, "Tangut_Components"),
    c(0x1884F, None, "TANGUT COMPONENT-080", 0x31, "Tangut_Components"),
    c(0x18850, None, "TANGUT COMPONENT-081", 0x31, "Tangut_Components"),
    c(0x18851, None, "TANGUT COMPONENT-082", 0x31, "Tangut_Components"),
    c(0x18852, None, "TANGUT COMPONENT-083", 0x31, "Tangut_Components"),
    c(0x18853, None, "TANGUT COMPONENT-084", 0x31, "Tangut_Components"),
    c(0x18854, None, "TANGUT COMPONENT-085", 0x31, "Tangut_Components"),
    c(0x18855, None, "TANGUT COMPONENT-086", 0x31, "Tangut_Components"),
    c(0x18856, None, "TANGUT COMPONENT-087", 0x31, "Tangut_Components"),
    c(0x18857, None, "TANGUT COMPONENT-088", 0x31, "Tangut_Components"),
    c(0x18858, None, "TANGUT COMPONENT-089", 0x31, "Tangut_Components"),
    c(0x18859, None, "TANGUT COMPONENT-090", 0x31, "Tangut_Components"),
    c(0x1885A, None, "TANGUT COMPONENT-091", 0x31, "Tangut_Components"),
    c(0x1885B, None, "TANGUT COMPONENT-092", 0x31, "Tangut_Components"),
    c(0x1885C, None, "TANGUT COMPONENT-093", 0x31, "Tangut_Components"),
    c(0x1885D, None, "TANGUT COMPONENT-094", 0x31, "Tangut_Components"),
    c(0x1885E, None, "TANGUT COMPONENT-095", 0x31, "Tangut_Components"),
    c(0x1885F, None, "TANGUT COMPONENT-096", 0x31, "Tangut_Components"),
    c(0x18860, None, "TANGUT COMPONENT-097", 0x31, "Tangut_Components"),
    c(0x18861, None, "TANGUT COMPONENT-098", 0x31, "Tangut_Components"),
    c(0x18862, None, "TANGUT COMPONENT-099", 0x31, "Tangut_Components"),
    c(0x18863, None, "TANGUT COMPONENT-100", 0x31, "Tangut_Components"),
    c(0x18864, None, "TANGUT COMPONENT-101", 0x31, "Tangut_Components"),
    c(0x18865, None, "TANGUT COMPONENT-102", 0x31, "Tangut_Components"),
    c(0x18866, None, "TANGUT COMPONENT-103", 0x31, "Tangut_Components"),
    c(0x18867, None, "TANGUT COMPONENT-104", 0x31, "Tangut_Components"),
    c(0x18868, None, "TANGUT COMPONENT-105", 0x31, "Tangut_Components"),
    c(0x18869, None, "TANGUT COMPONENT-106", 0x31, "Tangut_Components"),
    c(0x1886A, None, "TANGUT COMPONENT-107", 0x31, "Tangut_Components"),
    c(0x1886B, None, "TANGUT COMPONENT-108", 0x31, "Tangut_Components"),
    c(0x1886C, None, "TANGUT COMPONENT-109", 0x31, "Tangut_Components"),
    c(0x1886D, None, "TANGUT COMPONENT-110", 0x31, "Tangut_Components"),
    c(0x1886E, None, "TANGUT COMPONENT-111", 0x31, "Tangut_Components"),
    c(0x1886F, None, "TANGUT COMPONENT-112", 0x31, "Tangut_Components"),
    c(0x18870, None, "TANGUT COMPONENT-113", 0x31, "Tangut_Components"),
    c(0x18871, None, "TANGUT COMPONENT-114", 0x31, "Tangut_Components"),
    c(0x18872, None, "TANGUT COMPONENT-115", 0x31, "Tangut_Components"),
    c(0x18873, None, "TANGUT COMPONENT-116", 0x31, "Tangut_Components"),
    c(0x18874, None, "TANGUT COMPONENT-117", 0x31, "Tangut_Components"),
    c(0x18875, None, "TANGUT COMPONENT-118", 0x31, "Tangut_Components"),
    c(0x18876, None, "TANGUT COMPONENT-119", 0x31, "Tangut_Components"),
    c(0x18877, None, "TANGUT COMPONENT-120", 0x31, "Tangut_Components"),
    c(0x18878, None, "TANGUT COMPONENT-121", 0x31, "Tangut_Components"),
    c(0x18879, None, "TANGUT COMPONENT-122", 0x31, "Tangut_Components"),
    c(0x1887A, None, "TANGUT COMPONENT-123", 0x31, "Tangut_Components"),
    c(0x1887B, None, "TANGUT COMPONENT-124", 0x31, "Tangut_Components"),
    c(0x1887C, None, "TANGUT COMPONENT-125", 0x31, "Tangut_Components"),
    c(0x1887D, None, "TANGUT COMPONENT-126", 0x31, "Tangut_Components"),
    c(0x1887E, None, "TANGUT COMPONENT-127", 0x31, "Tangut_Components"),
    c(0x1887F, None, "TANGUT COMPONENT-128", 0x31, "Tangut_Components"),
    c(0x18880, None, "TANGUT COMPONENT-129", 0x31, "Tangut_Components"),
    c(0x18881, None, "TANGUT COMPONENT-130", 0x31, "Tangut_Components"),
    c(0x18882, None, "TANGUT COMPONENT-131", 0x31, "Tangut_Components"),
    c(0x18883, None, "TANGUT COMPONENT-132", 0x31, "Tangut_Components"),
    c(0x18884, None, "TANGUT COMPONENT-133", 0x31, "Tangut_Components"),
    c(0x18885, None, "TANGUT COMPONENT-134", 0x31, "Tangut_Components"),
    c(0x18886, None, "TANGUT COMPONENT-135", 0x31, "Tangut_Components"),
    c(0x18887, None, "TANGUT COMPONENT-136", 0x31, "Tangut_Components"),
    c(0x18888, None, "TANGUT COMPONENT-137", 0x31, "Tangut_Components"),
    c(0x18889, None, "TANGUT COMPONENT-138", 0x31, "Tangut_Components"),
    c(0x1888A, None, "TANGUT COMPONENT-139", 0x31, "Tangut_Components"),
    c(0x1888B, None, "TANGUT COMPONENT-140", 0x31, "Tangut_Components"),
    c(0x1888C, None, "TANGUT COMPONENT-141", 0x31, "Tangut_Components"),
    c(0x1888D, None, "TANGUT COMPONENT-142", 0x31, "Tangut_Components"),
    c(0x1888E, None, "TANGUT COMPONENT-143", 0x31, "Tangut_Components"),
    c(0x1888F, None, "TANGUT COMPONENT-144", 0x31, "Tangut_Components"),
    c(0x18890, None, "TANGUT COMPONENT-145", 0x31, "Tangut_Components"),
    c(0x18891, None, "TANGUT COMPONENT-146", 0x31, "Tangut_Components"),
    c(0x18892, None, "TANGUT COMPONENT-147", 0x31, "Tangut_Components"),
    c(0x18893, None, "TANGUT COMPONENT-148", 0x31, "Tangut_Components"),
    c(0x18894, None, "TANGUT COMPONENT-149", 0x31, "Tangut_Components"),
    c(0x18895, None, "TANGUT COMPONENT-150", 0x31, "Tangut_Components"),
    c(0x18896, None, "TANGUT COMPONENT-151", 0x31, "Tangut_Components"),
    c(0x18897, None, "TANGUT COMPONENT-152", 0x31, "Tangut_Components"),
    c(0x18898, None, "TANGUT COMPONENT-153", 0x31, "Tangut_Components"),
    c(0x18899, None, "TANGUT COMPONENT-154", 0x31, "Tangut_Components"),
    c(0x1889A, None, "TANGUT COMPONENT-155", 0x31, "Tangut_Components"),
    c(0x1889B, None, "TANGUT COMPONENT-156", 0x31, "Tangut_Components"),
    c(0x1889C, None, "TANGUT COMPONENT-157", 0x31, "Tangut_Components"),
    c(0x1889D, None, "TANGUT COMPONENT-158", 0x31, "Tangut_Components"),
    c(0x1889E, None, "TANGUT COMPONENT-159", 0x31, "Tangut_Components"),
    c(0x1889F, None, "TANGUT COMPONENT-160", 0x31, "Tangut_Components"),
    c(0x188A0, None, "TANGUT COMPONENT-161", 0x31, "Tangut_Components"),
    c(0x188A1, None, "TANGUT COMPONENT-162", 0x31, "Tangut_Components"),
    c(0x188A2, None, "TANGUT COMPONENT-163", 0x31, "Tangut_Components"),
    c(0x188A3, None, "TANGUT COMPONENT-164", 0x31, "Tangut_Components"),
    c(0x188A4, None, "TANGUT COMPONENT-165", 0x31, "Tangut_Components"),
    c(0x188A5, None, "TANGUT COMPONENT-166", 0x31, "Tangut_Components"),
    c(0x188A6, None, "TANGUT COMPONENT-167", 0x31, "Tangut_Components"),
    c(0x188A7, None, "TANGUT COMPONENT-168", 0x31, "Tangut_Components"),
    c(0x188A8, None, "TANGUT COMPONENT-169", 0x31, "Tangut_Components"),
    c(0x188A9, None, "TANGUT COMPONENT-170", 0x31, "Tangut_Components"),
    c(0x188AA, None, "TANGUT COMPONENT-171", 0x31, "Tangut_Components"),
    c(0x188AB, None, "TANGUT COMPONENT-172", 0x31, "Tangut_Components"),
    c(0x188AC, None, "TANGUT COMPONENT-173", 0x31, "Tangut_Components"),
    c(0x188AD, None, "TANGUT COMPONENT-174", 0x31, "Tangut_Components"),
    c(0x188AE, None, "TANGUT COMPONENT-175", 0x31, "Tangut_Components"),
    c(0x188AF, None, "TANGUT COMPONENT-176", 0x31, "Tangut_Components"),
    c(0x188B0, None, "TANGUT COMPONENT-177", 0x31, "Tangut_Components"),
    c(0x188B1, None, "TANGUT COMPONENT-178", 0x31, "Tangut_Components"),
    c(0x188B2, None, "TANGUT COMPONENT-179", 0x31, "Tangut_Components"),
    c(0x188B3, None, "TANGUT COMPONENT-180", 0x31, "Tangut_Components"),
    c(0x188B4, None, "TANGUT COMPONENT-181", 0x31, "Tangut_Components"),
    c(0x188B5, None, "TANGUT COMPONENT-182", 0x31, "Tangut_Components"),
    c(0x188B6, None, "TANGUT COMPONENT-183", 0x31, "Tangut_Components"),
    c(0x188B7, None, "TANGUT COMPONENT-184", 0x31, "Tangut_Components"),
    c(0x188B8, None, "TANGUT COMPONENT-185", 0x31, "Tangut_Components"),
    c(0x188B9, None, "TANGUT COMPONENT-186", 0x31, "Tangut_Components"),
    c(0x188BA, None, "TANGUT COMPONENT-187", 0x31, "Tangut_Components"),
    c(0x188BB, None, "TANGUT COMPONENT-188", 0x31, "Tangut_Components"),
    c(0x188BC, None, "TANGUT COMPONENT-189", 0x31, "Tangut_Components"),
    c(0x188BD, None, "TANGUT COMPONENT-190", 0x31, "Tangut_Components"),
    c(0x188BE, None, "TANGUT COMPONENT-191", 0x31, "Tangut_Components"),
    c(0x188BF, None, "TANGUT COMPONENT-192", 0x31, "Tangut_Components"),
    c(0x188C0, None, "TANGUT COMPONENT-193", 0x31, "Tangut_Components"),
    c(0x188C1, None, "TANGUT COMPONENT-194", 0x31, "Tangut_Components"),
    c(0x188C2, None, "TANGUT COMPONENT-195", 0x31, "Tangut_Components"),
    c(0x188C3, None, "TANGUT COMPONENT-196", 0x31, "Tangut_Components"),
    c(0x188C4, None, "TANGUT COMPONENT-197", 0x31, "Tangut_Components"),
    c(0x188C5, None, "TANGUT COMPONENT-198", 0x31, "Tangut_Components"),
    c(0x188C6, None, "TANGUT COMPONENT-199", 0x31, "Tangut_Components"),
    c(0x188C7, None, "TANGUT COMPONENT-200", 0x31, "Tangut_Components"),
    c(0x188C8, None, "TANGUT COMPONENT-201", 0x31, "Tangut_Components"),
    c(0x188C9, None, "TANGUT COMPONENT-202", 0x31, "Tangut_Components"),
    c(0x188CA, None, "TANGUT COMPONENT-203", 0x31, "Tangut_Components"),
    c(0x188CB, None, "TANGUT COMPONENT-204", 0x31, "Tangut_Components"),
    c(0x188CC, None, "TANGUT COMPONENT-205", 0x31, "Tangut_Components"),
    c(0x188CD, None, "TANGUT COMPONENT-206", 0x31, "Tangut_Components"),
    c(0x188CE, None, "TANGUT COMPONENT-207", 0x31, "Tangut_Components"),
    c(0x188CF, None, "TANGUT COMPONENT-208", 0x31, "Tangut_Components"),
    c(0x188D0, None, "TANGUT COMPONENT-209", 0x31, "Tangut_Components"),
    c(0x188D1, None, "TANGUT COMPONENT-210", 0x31, "Tangut_Components"),
    c(0x188D2, None, "TANGUT COMPONENT-211", 0x31, "Tangut_Components"),
    c(0x188D3, None, "TANGUT COMPONENT-212", 0x31, "Tangut_Components"),
    c(0x188D4, None, "TANGUT COMPONENT-213", 0x31, "Tangut_Components"),
    c(0x188D5, None, "TANGUT COMPONENT-214", 0x31, "Tangut_Components"),
    c(0x188D6, None, "TANGUT COMPONENT-215", 0x31, "Tangut_Components"),
    c(0x188D7, None, "TANGUT COMPONENT-216", 0x31, "Tangut_Components"),
    c(0x188D8, None, "TANGUT COMPONENT-217", 0x31, "Tangut_Components"),
    c(0x188D9, None, "TANGUT COMPONENT-218", 0x31, "Tangut_Components"),
    c(0x188DA, None, "TANGUT COMPONENT-219", 0x31, "Tangut_Components"),
    c(0x188DB, None, "TANGUT COMPONENT-220", 0x31, "Tangut_Components"),
    c(0x188DC, None, "TANGUT COMPONENT-221", 0x31, "Tangut_Components"),
    c(0x188DD, None, "TANGUT COMPONENT-222", 0x31, "Tangut_Components"),
    c(0x188DE, None, "TANGUT COMPONENT-223", 0x31, "Tangut_Components"),
    c(0x188DF, None, "TANGUT COMPONENT-224", 0x31, "Tangut_Components"),
    c(0x188E0, None, "TANGUT COMPONENT-225", 0x31, "Tangut_Components"),
    c(0x188E1, None, "TANGUT COMPONENT-226", 0x31, "Tangut_Components"),
    c(0x188E2, None, "TANGUT COMPONENT-227", 0x31, "Tangut_Components"),
    c(0x188E3, None, "TANGUT COMPONENT-228", 0x31, "Tangut_Components"),
    c(0x188E4, None, "TANGUT COMPONENT-229", 0x31, "Tangut_Components"),
    c(0x188E5, None, "TANGUT COMPONENT-230", 0x31, "Tangut_Components"),
    c(0x188E6, None, "TANGUT COMPONENT-231", 0x31, "Tangut_Components"),
    c(0x188E7, None, "TANGUT COMPONENT-232", 0x31, "Tangut_Components"),
    c(0x188E8, None, "TANGUT COMPONENT-233", 0x31, "Tangut_Components"),
    c(0x188E9, None, "TANGUT COMPONENT-234", 0x31, "Tangut_Components"),
    c(0x188EA, None, "TANGUT COMPONENT-235", 0x31, "Tangut_Components"),
    c(0x188EB, None, "TANGUT COMPONENT-236", 0x31, "Tangut_Components"),
    c(0x188EC, None, "TANGUT COMPONENT-237", 0x31, "Tangut_Components"),
    c(0x188ED, None, "TANGUT COMPONENT-238", 0x31, "Tangut_Components"),
    c(0x188EE, None, "TANGUT COMPONENT-239", 0x31, "Tangut_Components"),
    c(0x188EF, None, "TANGUT COMPONENT-240", 0x31, "Tangut_Components"),
    c(0x188F0, None, "TANGUT COMPONENT-241", 0x31, "Tangut_Components"),
    c(0x188F1, None, "TANGUT COMPONENT-242", 0x31, "Tangut_Components"),
    c(0x188F2, None, "TANGUT COMPONENT-243", 0x31, "Tangut_Components"),
    c(0x188F3, None, "TANGUT COMPONENT-244", 0x31, "Tangut_Components"),
    c(0x188F4, None, "TANGUT COMPONENT-245", 0x31, "Tangut_Components"),
    c(0x188F5, None, "TANGUT COMPONENT-246", 0x31, "Tangut_Components"),
    c(0x188F6, None, "TANGUT COMPONENT-247", 0x31, "Tangut_Components"),
    c(0x188F7, None, "TANGUT COMPONENT-248", 0x31, "Tangut_Components"),
    c(0x188F8, None, "TANGUT COMPONENT-249", 0x31, "Tangut_Components"),
    c(0x188F9, None, "TANGUT COMPONENT-250", 0x31, "Tangut_Components"),
    c(0x188FA, None, "TANGUT COMPONENT-251", 0x31, "Tangut_Components"),
    c(0x188FB, None, "TANGUT COMPONENT-252", 0x31, "Tangut_Components"),
    c(0x188FC, None, "TANGUT COMPONENT-253", 0x31, "Tangut_Components"),
    c(0x188FD, None, "TANGUT COMPONENT-254", 0x31, "Tangut_Components"),
    c(0x188FE, None, "TANGUT COMPONENT-255", 0x31, "Tangut_Components"),
    c(0x188FF, None, "TANGUT COMPONENT-256", 0x31, "Tangut_Components"),
    c(0x18900, None, "TANGUT COMPONENT-257", 0x31, "Tangut_Components"),
    c(0x18901, None, "TANGUT COMPONENT-258", 0x31, "Tangut_Components"),
    c(0x18902, None, "TANGUT COMPONENT-259", 0x31, "Tangut_Components"),
    c(0x18903, None, "TANGUT COMPONENT-260", 0x31, "Tangut_Components"),
    c(0x18904, None, "TANGUT COMPONENT-261", 0x31, "Tangut_Components"),
    c(0x18905, None, "TANGUT COMPONENT-262", 0x31, "Tangut_Components"),
    c(0x18906, None, "TANGUT COMPONENT-263", 0x31, "Tangut_Components"),
    c(0x18907, None, "TANGUT COMPONENT-264", 0x31, "Tangut_Components"),
    c(0x18908, None, "TANGUT COMPONENT-265", 0x31, "Tangut_Components"),
    c(0x18909, None, "TANGUT COMPONENT-266", 0x31, "Tangut_Components"),
    c(0x1890A, None, "TANGUT COMPONENT-267", 0x31, "Tangut_Components"),
    c(0x1890B, None, "TANGUT COMPONENT-268", 0x31, "Tangut_Components"),
    c(0x1890C, None, "TANGUT COMPONENT-269", 0x31, "Tangut_Components"),
    c(0x1890D, None, "TANGUT COMPONENT-270", 0x31, "Tangut_Components"),
    c(0x1890E, None, "TANGUT COMPONENT-271", 0x31, "Tangut_Components"),
    c(0x1890F, None, "TANGUT COMPONENT-272", 0x31, "Tangut_Components"),
    c(0x18910, None, "TANGUT COMPONENT-273", 0x31, "Tangut_Components"),
    c(0x18911, None, "TANGUT COMPONENT-274", 0x31, "Tangut_Components"),
    c(0x18912, None, "TANGUT COMPONENT-275", 0x31, "Tangut_Components"),
    c(0x18913, None, "TANGUT COMPONENT-276", 0x31, "Tangut_Components"),
    c(0x18914, None, "TANGUT COMPONENT-277", 0x31, "Tangut_Components"),
    c(0x18915, None, "TANGUT COMPONENT-278", 0x31, "Tangut_Components"),
    c(0x18916, None, "TANGUT COMPONENT-279", 0x31, "Tangut_Components"),
    c(0x18917, None, "TANGUT COMPONENT-280", 0x31, "Tangut_Components"),
    c(0x18918, None, "TANGUT COMPONENT-281", 0x31, "Tangut_Components"),
    c(0x18919, None, "TANGUT COMPONENT-282", 0x31, "Tangut_Components"),
    c(0x1891A, None, "TANGUT COMPONENT-283", 0x31, "Tangut_Components"),
    c(0x1891B, None, "TANGUT COMPONENT-284", 0x31, "Tangut_Components"),
    c(0x1891C, None, "TANGUT COMPONENT-285", 0x31, "Tangut_Components"),
    c(0x1891D, None, "TANGUT COMPONENT-286", 0x31, "Tangut_Components"),
    c(0x1891E, None, "TANGUT COMPONENT-287", 0x31, "Tangut_Components"),
    c(0x1891F, None, "TANGUT COMPONENT-288", 0x31, "Tangut_Components"),
    c(0x18920, None, "TANGUT COMPONENT-289", 0x31, "Tangut_Components"),
    c(0x18921, None, "TANGUT COMPONENT-290", 0x31, "Tangut_Components"),
    c(0x18922, None, "TANGUT COMPONENT-291", 0x31, "Tangut_Components"),
    c(0x18923, None, "TANGUT COMPONENT-292", 0x31, "Tangut_Components"),
    c(0x18924, None, "TANGUT COMPONENT-293", 0x31, "Tangut_Components"),
    c(0x18925, None, "TANGUT COMPONENT-294", 0x31, "Tangut_Components"),
    c(0x18926, None, "TANGUT COMPONENT-295", 0x31, "Tangut_Components"),
    c(0x18927, None, "TANGUT COMPONENT-296", 0x31, "Tangut_Components"),
    c(0x18928, None, "TANGUT COMPONENT-297", 0x31, "Tangut_Components"),
    c(0x18929, None, "TANGUT COMPONENT-298", 0x31, "Tangut_Components"),
    c(0x1892A, None, "TANGUT COMPONENT-299", 0x31, "Tangut_Components"),
    c(0x1892B, None, "TANGUT COMPONENT-300", 0x31, "Tangut_Components"),
    c(0x1892C, None, "TANGUT COMPONENT-301", 0x31, "Tangut_Components"),
    c(0x1892D, None, "TANGUT COMPONENT-302", 0x31, "Tangut_Components"),
    c(0x1892E, None, "TANGUT COMPONENT-303", 0x31, "Tangut_Components"),
    c(0x1892F, None, "TANGUT COMPONENT-304", 0x31, "Tangut_Components"),
    c(0x18930, None, "TANGUT COMPONENT-305", 0x31, "Tangut_Components"),
    c(0x18931, None, "TANGUT COMPONENT-306", 0x31, "Tangut_Components"),
    c(0x18932, None, "TANGUT COMPONENT-307", 0x31, "Tangut_Components"),
    c(0x18933, None, "TANGUT COMPONENT-308", 0x31, "Tangut_Components"),
    c(0x18934, None, "TANGUT COMPONENT-309", 0x31, "Tangut_Components"),
    c(0x18935, None, "TANGUT COMPONENT-310", 0x31, "Tangut_Components"),
    c(0x18936, None, "TANGUT COMPONENT-311", 0x31, "Tangut_Components"),
    c(0x18937, None, "TANGUT COMPONENT-312", 0x31, "Tangut_Components"),
    c(0x18938, None, "TANGUT COMPONENT-313", 0x31, "Tangut_Components"),
    c(0x18939, None, "TANGUT COMPONENT-314", 0x31, "Tangut_Components"),
    c(0x1893A, None, "TANGUT COMPONENT-315", 0x31, "Tangut_Components"),
    c(0x1893B, None, "TANGUT COMPONENT-316", 0x31, "Tangut_Components"),
    c(0x1893C, None, "TANGUT COMPONENT-317", 0x31, "Tangut_Components"),
    c(0x1893D, None, "TANGUT COMPONENT-318", 0x31, "Tangut_Components"),
    c(0x1893E, None, "TANGUT COMPONENT-319", 0x31, "Tangut_Components"),
    c(0x1893F, None, "TANGUT COMPONENT-320", 0x31, "Tangut_Components"),
    c(0x18940, None, "TANGUT COMPONENT-321", 0x31, "Tangut_Components"),
    c(0x18941, None, "TANGUT COMPONENT-322", 0x31, "Tangut_Components"),
    c(0x18942, None, "TANGUT COMPONENT-323", 0x31, "Tangut_Components"),
    c(0x18943, None, "TANGUT COMPONENT-324", 0x31, "Tangut_Components"),
    c(0x18944, None, "TANGUT COMPONENT-325", 0x31, "Tangut_Components"),
    c(0x18945, None, "TANGUT COMPONENT-326", 0x31, "Tangut_Components"),
    c(0x18946, None, "TANGUT COMPONENT-327", 0x31, "Tangut_Components"),
    c(0x18947, None, "TANGUT COMPONENT-328", 0x31, "Tangut_Components"),
    c(0x18948, None, "TANGUT COMPONENT-329", 0x31, "Tangut_Components"),
    c(0x18949, None, "TANGUT COMPONENT-330", 0x31, "Tangut_Components"),
    c(0x1894A, None, "TANGUT COMPONENT-331", 0x31, "Tangut_Components"),
    c(0x1894B, None, "TANGUT COMPONENT-332", 0x31, "Tangut_Components"),
    c(0x1894C, None, "TANGUT COMPONENT-333", 0x31, "Tangut_Components"),
    c(0x1894D, None, "TANGUT COMPONENT-334", 0x31, "Tangut_Components"),
    c(0x1894E, None, "TANGUT COMPONENT-335", 0x31, "Tangut_Components"),
    c(0x1894F, None, "TANGUT COMPONENT-336", 0x31, "Tangut_Components"),
    c(0x18950, None, "TANGUT COMPONENT-337", 0x31, "Tangut_Components"),
    c(0x18951, None, "TANGUT COMPONENT-338", 0x31, "Tangut_Components"),
    c(0x18952, None, "TANGUT COMPONENT-339", 0x31, "Tangut_Components"),
    c(0x18953, None, "TANGUT COMPONENT-340", 0x31, "Tangut_Components"),
    c(0x18954, None, "TANGUT COMPONENT-341", 0x31, "Tangut_Components"),
    c(0x18955, None, "TANGUT COMPONENT-342", 0x31, "Tangut_Components"),
    c(0x18956, None, "TANGUT COMPONENT-343", 0x31, "Tangut_Components"),
    c(0x18957, None, "TANGUT COMPONENT-344", 0x31, "Tangut_Components"),
    c(0x18958, None, "TANGUT COMPONENT-345", 0x31, "Tangut_Components"),
    c(0x18959, None, "TANGUT COMPONENT-346", 0x31, "Tangut_Components"),
    c(0x1895A, None, "TANGUT COMPONENT-347", 0x31, "Tangut_Components"),
    c(0x1895B, None, "TANGUT COMPONENT-348", 0x31, "Tangut_Components"),
    c(0x1895C, None, "TANGUT COMPONENT-349", 0x31, "Tangut_Components"),
    c(0x1895D, None, "TANGUT COMPONENT-350", 0x31, "Tangut_Components"),
    c(0x1895E, None, "TANGUT COMPONENT-351", 0x31, "Tangut_Components"),
    c(0x1895F, None, "TANGUT COMPONENT-352", 0x31, "Tangut_Components"),
    c(0x18960, None, "TANGUT COMPONENT-353", 0x31, "Tangut_Components"),
    c(0x18961, None, "TANGUT COMPONENT-354", 0x31, "Tangut_Components"),
    c(0x18962, None, "TANGUT COMPONENT-355", 0x31, "Tangut_Components"),
    c(0x18963, None, "TANGUT COMPONENT-356", 0x31, "Tangut_Components"),
    c(0x18964, None, "TANGUT COMPONENT-357", 0x31, "Tangut_Components"),
    c(0x18965, None, "TANGUT COMPONENT-358", 0x31, "Tangut_Components"),
    c(0x18966, None, "TANGUT COMPONENT-359", 0x31, "Tangut_Components"),
    c(0x18967, None, "TANGUT COMPONENT-360", 0x31, "Tangut_Components"),
    c(0x18968, None, "TANGUT COMPONENT-361", 0x31, "Tangut_Components"),
    c(0x18969, None, "TANGUT COMPONENT-362", 0x31, "Tangut_Components"),
    c(0x1896A, None, "TANGUT COMPONENT-363", 0x31, "Tangut_Components"),
    c(0x1896B, None, "TANGUT COMPONENT-364", 0x31, "Tangut_Components"),
    c(0x1896C, None, "TANGUT COMPONENT-365", 0x31, "Tangut_Components"),
    c(0x1896D, None, "TANGUT COMPONENT-366", 0x31, "Tangut_Components"),
    c(0x1896E, None, "TANGUT COMPONENT-367", 0x31, "Tangut_Components"),
    c(0x1896F, None, "TANGUT COMPONENT-368", 0x31, "Tangut_Components"),
    c(0x18970, None, "TANGUT COMPONENT-369", 0x31, "Tangut_Components"),
    c(0x18971, None, "TANGUT COMPONENT-370", 0x31, "Tangut_Components"),
    c(0x18972, None, "TANGUT COMPONENT-371", 0x31, "Tangut_Components"),
    c(0x18973, None, "TANGUT COMPONENT-372", 0x31, "Tangut_Components"),
    c(0x18974, None, "TANGUT COMPONENT-373", 0x31, "Tangut_Components"),
    c(0x18975, None, "TANGUT COMPONENT-374", 0x31, "Tangut_Components"),
    c(0x18976, None, "TANGUT COMPONENT-375", 0x31, "Tangut_Components"),
    c(0x18977, None, "TANGUT COMPONENT-376", 0x31, "Tangut_Components"),
    c(0x18978, None, "TANGUT COMPONENT-377", 0x31, "Tangut_Components"),
    c(0x18979, None, "TANGUT COMPONENT-378", 0x31, "Tangut_Components"),
    c(0x1897A, None, "TANGUT COMPONENT-379", 0x31, "Tangut_Components"),
    c(0x1897B, None, "TANGUT COMPONENT-380", 0x31, "Tangut_Components"),
    c(0x1897C, None, "TANGUT COMPONENT-381", 0x31, "Tangut_Components"),
    c(0x1897D, None, "TANGUT COMPONENT-382", 0x31, "Tangut_Components"),
    c(0x1897E, None, "TANGUT COMPONENT-383", 0x31, "Tangut_Components"),
    c(0x1897F, None, "TANGUT COMPONENT-384", 0x31, "Tangut_Components"),
    c(0x18980, None, "TANGUT COMPONENT-385", 0x31, "Tangut_Components"),
    c(0x18981, None, "TANGUT COMPONENT-386", 0x31, "Tangut_Components"),
    c(0x18982, None, "TANGUT COMPONENT-387", 0x31, "Tangut_Components"),
    c(0x18983, None, "TANGUT COMPONENT-388", 0x31, "Tangut_Components"),
    c(0x18984, None, "TANGUT COMPONENT-389", 0x31, "Tangut_Components"),
    c(0x18985, None, "TANGUT COMPONENT-390", 0x31, "Tangut_Components"),
    c(0x18986, None, "TANGUT COMPONENT-391", 0x31, "Tangut_Components"),
    c(0x18987, None, "TANGUT COMPONENT-392", 0x31, "Tangut_Components"),
    c(0x18988, None, "TANGUT COMPONENT-393", 0x31, "Tangut_Components"),
    c(0x18989, None, "TANGUT COMPONENT-394", 0x31, "Tangut_Components"),
    c(0x1898A, None, "TANGUT COMPONENT-395", 0x31, "Tangut_Components"),
    c(0x1898B, None, "TANGUT COMPONENT-396", 0x31, "Tangut_Components"),
    c(0x1898C, None, "TANGUT COMPONENT-397", 0x31, "Tangut_Components"),
    c(0x1898D, None, "TANGUT COMPONENT-398", 0x31, "Tangut_Components"),
    c(0x1898E, None, "TANGUT COMPONENT-399", 0x31, "Tangut_Components"),
    c(0x1898F, None, "TANGUT COMPONENT-400", 0x31, "Tangut_Components"),
    c(0x18990, None, "TANGUT COMPONENT-401", 0x31, "Tangut_Components"),
    c(0x18991, None, "TANGUT COMPONENT-402", 0x31, "Tangut_Components"),
    c(0x18992, None, "TANGUT COMPONENT-403", 0x31, "Tangut_Components"),
    c(0x18993, None, "TANGUT COMPONENT-404", 0x31, "Tangut_Components"),
    c(0x18994, None, "TANGUT COMPONENT-405", 0x31, "Tangut_Components"),
    c(0x18995, None, "TANGUT COMPONENT-406", 0x31, "Tangut_Components"),
    c(0x18996, None, "TANGUT COMPONENT-407", 0x31, "Tangut_Components"),
    c(0x18997, None, "TANGUT COMPONENT-408", 0x31, "Tangut_Components"),
    c(0x18998, None, "TANGUT COMPONENT-409", 0x31, "Tangut_Components"),
    c(0x18999, None, "TANGUT COMPONENT-410", 0x31, "Tangut_Components"),
    c(0x1899A, None, "TANGUT COMPONENT-411", 0x31, "Tangut_Components"),
    c(0x1899B, None, "TANGUT COMPONENT-412", 0x31, "Tangut_Components"),
    c(0x1899C, None, "TANGUT COMPONENT-413", 0x31, "Tangut_Components"),
    c(0x1899D, None, "TANGUT COMPONENT-414", 0x31, "Tangut_Components"),
    c(0x1899E, None, "TANGUT COMPONENT-415", 0x31, "Tangut_Components"),
    c(0x1899F, None, "TANGUT COMPONENT-416", 0x31, "Tangut_Components"),
    c(0x189A0, None, "TANGUT COMPONENT-417", 0x31, "Tangut_Components"),
    c(0x189A1, None, "TANGUT COMPONENT-418", 0x31, "Tangut_Components"),
    c(0x189A2, None, "TANGUT COMPONENT-419", 0x31, "Tangut_Components"),
    c(0x189A3, None, "TANGUT COMPONENT-420", 0x31, "Tangut_Components"),
    c(0x189A4, None, "TANGUT COMPONENT-421", 0x31, "Tangut_Components"),
    c(0x189A5, None, "TANGUT COMPONENT-422", 0x31, "Tangut_Components"),
    c(0x189A6, None, "TANGUT COMPONENT-423", 0x31, "Tangut_Components"),
    c(0x189A7, None, "TANGUT COMPONENT-424", 0x31, "Tangut_Components"),
    c(0x189A8, None, "TANGUT COMPONENT-425", 0x31, "Tangut_Components"),
    c(0x189A9, None, "TANGUT COMPONENT-426", 0x31, "Tangut_Components"),
    c(0x189AA, None, "TANGUT COMPONENT-427", 0x31, "Tangut_Components"),
    c(0x189AB, None, "TANGUT COMPONENT-428", 0x31, "Tangut_Components"),
    c(0x189AC, None, "TANGUT COMPONENT-429", 0x31, "Tangut_Components"),
    c(0x189AD, None, "TANGUT COMPONENT-430", 0x31, "Tangut_Components"),
    c(0x189AE, None, "TANGUT COMPONENT-431", 0x31, "Tangut_Components"),
    c(0x189AF, None, "TANGUT COMPONENT-432", 0x31, "Tangut_Components"),
    c(0x189B0, None, "TANGUT COMPONENT-433", 0x31, "Tangut_Components"),
    c(0x189B1, None, "TANGUT COMPONENT-434", 0x31, "Tangut_Components"),
    c(0x189B2, None, "TANGUT COMPONENT-435", 0x31, "Tangut_Components"),
    c(0x189B3, None, "TANGUT COMPONENT-436", 0x31, "Tangut_Components"),
    c(0x189B4, None, "TANGUT COMPONENT-437", 0x31, "Tangut_Components"),
    c(0x189B5, None, "TANGUT COMPONENT-438", 0x31, "Tangut_Components"),
    c(0x189B6, None, "TANGUT COMPONENT-439", 0x31, "Tangut_Components"),
    c(0x189B7, None, "TANGUT COMPONENT-440", 0x31, "Tangut_Components"),
    c(0x189B8, None, "TANGUT COMPONENT-441", 0x31, "Tangut_Components"),
    c(0x189B9, None, "TANGUT COMPONENT-442", 0x31, "Tangut_Components"),
    c(0x189BA, None, "TANGUT COMPONENT-443", 0x31, "Tangut_Components"),
    c(0x189BB, None, "TANGUT COMPONENT-444", 0x31, "Tangut_Components"),
    c(0x189BC, None, "TANGUT COMPONENT-445", 0x31, "Tangut_Components"),
    c(0x189BD, None, "TANGUT COMPONENT-446", 0x31, "Tangut_Components"),
    c(0x189BE, None, "TANGUT COMPONENT-447", 0x31, "Tangut_Components"),
    c(0x189BF, None, "TANGUT COMPONENT-448", 0x31, "Tangut_Components"),
    c(0x189C0, None, "TANGUT COMPONENT-449", 0x31, "Tangut_Components"),
    c(0x189C1, None, "TANGUT COMPONENT-450", 0x31, "Tangut_Components"),
    c(0x189C2, None, "TANGUT COMPONENT-451", 0x31, "Tangut_Components"),
    c(0x189C3, None, "TANGUT COMPONENT-452", 0x31, "Tangut_Components"),
    c(0x189C4, None, "TANGUT COMPONENT-453", 0x31, "Tangut_Components"),
    c(0x189C5, None, "TANGUT COMPONENT-454", 0x31, "Tangut_Components"),
    c(0x189C6, None, "TANGUT COMPONENT-455", 0x31, "Tangut_Components"),
    c(0x189C7, None, "TANGUT COMPONENT-456", 0x31, "Tangut_Components"),
    c(0x189C8, None, "TANGUT COMPONENT-457", 0x31, "Tangut_Components"),
    c(0x189C9, None, "TANGUT COMPONENT-458", 0x31, "Tangut_Components"),
    c(0x189CA, None, "TANGUT COMPONENT-459", 0x31, "Tangut_Components"),
    c(0x189CB, None, "TANGUT COMPONENT-460", 0x31, "Tangut_Components"),
    c(0x189CC, None, "TANGUT COMPONENT-461", 0x31, "Tangut_Components"),
    c(0x189CD, None, "TANGUT COMPONENT-462", 0x31, "Tangut_Components"),
    c(0x189CE, None, "TANGUT COMPONENT-463", 0x31, "Tangut_Components"),
    c(0x189CF, None, "TANGUT COMPONENT-464", 0x31, "Tangut_Components"),
    c(0x189D0, None, "TANGUT COMPONENT-465", 0x31, "Tangut_Components"),
    c(0x189D1, None, "TANGUT COMPONENT-466", 0x31, "Tangut_Components"),
    c(0x189D2, None, "TANGUT COMPONENT-467", 0x31, "Tangut_Components"),
    c(0x189D3, None, "TANGUT COMPONENT-468", 0x31, "Tangut_Components"),
    c(0x189D4, None, "TANGUT COMPONENT-469", 0x31, "Tangut_Components"),
    c(0x189D5, None, "TANGUT COMPONENT-470", 0x31, "Tangut_Components"),
    c(0x189D6, None, "TANGUT COMPONENT-471", 0x31, "Tangut_Components"),
    c(0x189D7, None, "TANGUT COMPONENT-472", 0x31, "Tangut_Components"),
    c(0x189D8, None, "TANGUT COMPONENT-473", 0x31, "Tangut_Components"),
    c(0x189D9, None, "TANGUT COMPONENT-474", 0x31, "Tangut_Components"),
    c(0x189DA, None, "TANGUT COMPONENT-475", 0x31, "Tangut_Components"),
    c(0x189DB, None, "TANGUT COMPONENT-476", 0x31, "Tangut_Components"),
    c(0x189DC, None, "TANGUT COMPONENT-477", 0x31, "Tangut_Components"),
    c(0x189DD, None, "TANGUT COMPONENT-478", 0x31, "Tangut_Components"),
    c(0x189DE, None, "TANGUT COMPONENT-479", 0x31, "Tangut_Components"),
    c(0x189DF, None, "TANGUT COMPONENT-480", 0x31, "Tangut_Components"),
    c(0x189E0, None, "TANGUT COMPONENT-481", 0x31, "Tangut_Components"),
    c(0x189E1, None, "TANGUT COMPONENT-482", 0x31, "Tangut_Components"),
    c(0x189E2, None, "TANGUT COMPONENT-483", 0x31, "Tangut_Components"),
    c(0x189E3, None, "TANGUT COMPONENT-484", 0x31, "Tangut_Components"),
    c(0x189E4, None, "TANGUT COMPONENT-485", 0x31, "Tangut_Components"),
    c(0x189E5, None, "TANGUT COMPONENT-486", 0x31, "Tangut_Components"),
    c(0x189E6, None, "TANGUT COMPONENT-487", 0x31, "Tangut_Components"),
    c(0x189E7, None, "TANGUT COMPONENT-488", 0x31, "Tangut_Components"),
    c(0x189E8, None, "TANGUT COMPONENT-489", 0x31, "Tangut_Components"),
    c(0x189E9, None, "TANGUT COMPONENT-490", 0x31, "Tangut_Components"),
    c(0x189EA, None, "TANGUT COMPONENT-491", 0x31, "Tangut_Components"),
    c(0x189EB, None, "TANGUT COMPONENT-492", 0x31, "Tangut_Components"),
    c(0x189EC, None, "TANGUT COMPONENT-493", 0x31, "Tangut_Components"),
    c(0x189ED, None, "TANGUT COMPONENT-494", 0x31, "Tangut_Components"),
    c(0x189EE, None, "TANGUT COMPONENT-495", 0x31, "Tangut_Components"),
    c(0x189EF, None, "TANGUT COMPONENT-496", 0x31, "Tangut_Components"),
    c(0x189F0, None, "TANGUT COMPONENT-497", 0x31, "Tangut_Components"),
    c(0x189F1, None, "TANGUT COMPONENT-498", 0x31, "Tangut_Components"),
    c(0x189F2, None, "TANGUT COMPONENT-499", 0x31, "Tangut_Components"),
    c(0x189F3, None, "TANGUT COMPONENT-500", 0x31, "Tangut_Components"),
    c(0x189F4, None, "TANGUT COMPONENT-501", 0x31, "Tangut_Components"),
    c(0x189F5, None, "TANGUT COMPONENT-502", 0x31, "Tangut_Components"),
    c(0x189F6, None, "TANGUT COMPONENT-503", 0x31, "Tangut_Components"),
    c(0x189F7, None, "TANGUT COMPONENT-504", 0x31, "Tangut_Components"),
    c(0x189F8, None, "TANGUT COMPONENT-505", 0x31, "Tangut_Components"),
    c(0x189F9, None, "TANGUT COMPONENT-506", 0x31, "Tangut_Components"),
    c(0x189FA, None, "TANGUT COMPONENT-507", 0x31, "Tangut_Components"),
    c(0x189FB, None, "TANGUT COMPONENT-508", 0x31, "Tangut_Components"),
    c(0x189FC, None, "TANGUT COMPONENT-509", 0x31, "Tangut_Components"),
    c(0x189FD, None, "TANGUT COMPONENT-510", 0x31, "Tangut_Components"),
    c(0x189FE, None, "TANGUT COMPONENT-511", 0x31, "Tangut_Components"),
    c(0x189FF, None, "TANGUT COMPONENT-512", 0x31, "Tangut_Components"),
    c(0x18A00, None, "TANGUT COMPONENT-513", 0x31, "Tangut_Components"),
    c(0x18A01, None, "TANGUT COMPONENT-514", 0x31, "Tangut_Components"),
    c(0x18A02, None, "TANGUT COMPONENT-515", 0x31, "Tangut_Components"),
    c(0x18A03, None, "TANGUT COMPONENT-516", 0x31, "Tangut_Components"),
    c(0x18A04, None, "TANGUT COMPONENT-517", 0x31, "Tangut_Components"),
    c(0x18A05, None, "TANGUT COMPONENT-518", 0x31, "Tangut_Components"),
    c(0x18A06, None, "TANGUT COMPONENT-519", 0x31, "Tangut_Components"),
    c(0x18A07, None, "TANGUT COMPONENT-520", 0x31, "Tangut_Components"),
    c(0x18A08, None, "TANGUT COMPONENT-521", 0x31, "Tangut_Components"),
    c(0x18A09, None, "TANGUT COMPONENT-522", 0x31, "Tangut_Components"),
    c(0x18A0A, None, "TANGUT COMPONENT-523", 0x31, "Tangut_Components"),
    c(0x18A0B, None, "TANGUT COMPONENT-524", 0x31, "Tangut_Components"),
    c(0x18A0C, None, "TANGUT COMPONENT-525", 0x31, "Tangut_Components"),
    c(0x18A0D, None, "TANGUT COMPONENT-526", 0x31, "Tangut_Components"),
    c(0x18A0E, None, "TANGUT COMPONENT-527", 0x31, "Tangut_Components"),
    c(0x18A0F, None, "TANGUT COMPONENT-528", 0x31, "Tangut_Components"),
    c(0x18A10, None, "TANGUT COMPONENT-529", 0x31, "Tangut_Components"),
    c(0x18A11, None, "TANGUT COMPONENT-530", 0x31, "Tangut_Components"),
    c(0x18A12, None, "TANGUT COMPONENT-531", 0x31, "Tangut_Components"),
    c(0x18A13, None, "TANGUT COMPONENT-532", 0x31, "Tangut_Components"),
    c(0x18A14, None, "TANGUT COMPONENT-533", 0x31, "Tangut_Components"),
    c(0x18A15, None, "TANGUT COMPONENT-534", 0x31, "Tangut_Components"),
    c(0x18A16, None, "TANGUT COMPONENT-535", 0x31, "Tangut_Components"),
    c(0x18A17, None, "TANGUT COMPONENT-536", 0x31, "Tangut_Components"),
    c(0x18A18, None, "TANGUT COMPONENT-537", 0x31, "Tangut_Components"),
    c(0x18A19, None, "TANGUT COMPONENT-538", 0x31, "Tangut_Components"),
    c(0x18A1A, None, "TANGUT COMPONENT-539", 0x31, "Tangut_Components"),
    c(0x18A1B, None, "TANGUT COMPONENT-540", 0x31, "Tangut_Components"),
    c(0x18A1C, None, "TANGUT COMPONENT-541", 0x31, "Tangut_Components"),
    c(0x18A1D, None, "TANGUT COMPONENT-542", 0x31, "Tangut_Components"),
    c(0x18A1E, None, "TANGUT COMPONENT-543", 0x31, "Tangut_Components"),
    c(0x18A1F, None, "TANGUT COMPONENT-544", 0x31, "Tangut_Components"),
    c(0x18A20, None, "TANGUT COMPONENT-545", 0x31, "Tangut_Components"),
    c(0x18A21, None, "TANGUT COMPONENT-546", 0x31, "Tangut_Components"),
    c(0x18A22, None, "TANGUT COMPONENT-547", 0x31, "Tangut_Components"),
    c(0x18A23, None, "TANGUT COMPONENT-548", 0x31, "Tangut_Components"),
    c(0x18A24, None, "TANGUT COMPONENT-549", 0x31, "Tangut_Components"),
    c(0x18A25, None, "TANGUT COMPONENT-550", 0x31, "Tangut_Components"),
    c(0x18A26, None, "TANGUT COMPONENT-551", 0x31, "Tangut_Components"),
    c(0x18A27, None, "TANGUT COMPONENT-552", 0x31, "Tangut_Components"),
    c(0x18A28, None, "TANGUT COMPONENT-553", 0x31, "Tangut_Components"),
    c(0x18A29, None, "TANGUT COMPONENT-554", 0x31, "Tangut_Components"),
    c(0x18A2A, None, "TANGUT COMPONENT-555", 0x31, "Tangut_Components"),
    c(0x18A2B, None, "TANGUT COMPONENT-556", 0x31, "Tangut_Components"),
    c(0x18A2C, None, "TANGUT COMPONENT-557", 0x31, "Tangut_Components"),
    c(0x18A2D, None, "TANGUT COMPONENT-558", 0x31, "Tangut_Components"),
    c(0x18A2E, None, "TANGUT COMPONENT-559", 0x31, "Tangut_Components"),
    c(0x18A2F, None, "TANGUT COMPONENT-560", 0x31, "Tangut_Components"),
    c(0x18A30, None, "TANGUT COMPONENT-561", 0x31, "Tangut_Components"),
    c(0x18A31, None, "TANGUT COMPONENT-562", 0x31, "Tangut_Components"),
    c(0x18A32, None, "TANGUT COMPONENT-563", 0x31, "Tangut_Components"),
    c(0x18A33, None, "TANGUT COMPONENT-564", 0x31, "Tangut_Components"),
    c(0x18A34, None, "TANGUT COMPONENT-565", 0x31, "Tangut_Components"),
    c(0x18A35, None, "TANGUT COMPONENT-566", 0x31, "Tangut_Components"),
    c(0x18A36, None, "TANGUT COMPONENT-567", 0x31, "Tangut_Components"),
    c(0x18A37, None, "TANGUT COMPONENT-568", 0x31, "Tangut_Components"),
    c(0x18A38, None, "TANGUT COMPONENT-569", 0x31, "Tangut_Components"),
    c(0x18A39, None, "TANGUT COMPONENT-570", 0x31, "Tangut_Components"),
    c(0x18A3A, None, "TANGUT COMPONENT-571", 0x31, "Tangut_Components"),
    c(0x18A3B, None, "TANGUT COMPONENT-572", 0x31, "Tangut_Components"),
    c(0x18A3C, None, "TANGUT COMPONENT-573", 0x31, "Tangut_Components"),
    c(0x18A3D, None, "TANGUT COMPONENT-574", 0x31, "Tangut_Components"),
    c(0x18A3E, None, "TANGUT COMPONENT-575", 0x31, "Tangut_Components"),
    c(0x18A3F, None, "TANGUT COMPONENT-576", 0x31, "Tangut_Components"),
    c(0x18A40, None, "TANGUT COMPONENT-577", 0x31, "Tangut_Components"),
    c(0x18A41, None, "TANGUT COMPONENT-578", 0x31, "Tangut_Components"),
    c(0x18A42, None, "TANGUT COMPONENT-579", 0x31, "Tangut_Components"),
    c(0x18A43, None, "TANGUT COMPONENT-580", 0x31, "Tangut_Components"),
    c(0x18A44, None, "TANGUT COMPONENT-581", 0x31, "Tangut_Components"),
    c(0x18A45, None, "TANGUT COMPONENT-582", 0x31, "Tangut_Components"),
    c(0x18A46, None, "TANGUT COMPONENT-583", 0x31, "Tangut_Components"),
    c(0x18A47, None, "TANGUT COMPONENT-584", 0x31, "Tangut_Components"),
    c(0x18A48, None, "TANGUT COMPONENT-585", 0x31, "Tangut_Components"),
    c(0x18A49, None, "TANGUT COMPONENT-586", 0x31, "Tangut_Components"),
    c(0x18A4A, None, "TANGUT COMPONENT-587", 0x31, "Tangut_Components"),
    c(0x18A4B, None, "TANGUT COMPONENT-588", 0x31, "Tangut_Components"),
    c(0x18A4C, None, "TANGUT COMPONENT-589", 0x31, "Tangut_Components"),
    c(0x18A4D, None, "TANGUT COMPONENT-590", 0x31, "Tangut_Components"),
    c(0x18A4E, None, "TANGUT COMPONENT-591", 0x31, "Tangut_Components"),
    c(0x18A4F, None, "TANGUT COMPONENT-592", 0x31, "Tangut_Components"),
    c(0x18A50, None, "TANGUT COMPONENT-593", 0x31, "Tangut_Components"),
    c(0x18A51, None, "TANGUT COMPONENT-594", 0x31, "Tangut_Components"),
    c(0x18A52, None, "TANGUT COMPONENT-595", 0x31, "Tangut_Components"),
    c(0x18A53, None, "TANGUT COMPONENT-596", 0x31, "Tangut_Components"),
    c(0x18A54, None, "TANGUT COMPONENT-597", 0x31, "Tangut_Components"),
    c(0x18A55, None, "TANGUT COMPONENT-598", 0x31, "Tangut_Components"),
    c(0x18A56, None, "TANGUT COMPONENT-599", 0x31, "Tangut_Components"),
    c(0x18A57, None, "TANGUT COMPONENT-600", 0x31, "Tangut_Components"),
    c(0x18A58, None, "TANGUT COMPONENT-601", 0x31, "Tangut_Components"),
    c(0x18A59, None, "TANGUT COMPONENT-602", 0x31, "Tangut_Components"),
    c(0x18A5A, None, "TANGUT COMPONENT-603", 0x31, "Tangut_Components"),
    c(0x18A5B, None, "TANGUT COMPONENT-604", 0x31, "Tangut_Components"),
    c(0x18A5C, None, "TANGUT COMPONENT-605", 0x31, "Tangut_Components"),
    c(0x18A5D, None, "TANGUT COMPONENT-606", 0x31, "Tangut_Components"),
    c(0x18A5E, None, "TANGUT COMPONENT-607", 0x31, "Tangut_Components"),
    c(0x18A5F, None, "TANGUT COMPONENT-608", 0x31, "Tangut_Components"),
    c(0x18A60, None, "TANGUT COMPONENT-609", 0x31, "Tangut_Components"),
    c(0x18A61, None, "TANGUT COMPONENT-610", 0x31, "Tangut_Components"),
    c(0x18A62, None, "TANGUT COMPONENT-611", 0x31, "Tangut_Components"),
    c(0x18A63, None, "TANGUT COMPONENT-612", 0x31, "Tangut_Components"),
    c(0x18A64, None, "TANGUT COMPONENT-613", 0x31, "Tangut_Components"),
    c(0x18A65, None, "TANGUT COMPONENT-614", 0x31, "Tangut_Components"),
    c(0x18A66, None, "TANGUT COMPONENT-615", 0x31, "Tangut_Components"),
    c(0x18A67, None, "TANGUT COMPONENT-616", 0x31, "Tangut_Components"),
    c(0x18A68, None, "TANGUT COMPONENT-617", 0x31, "Tangut_Components"),
    c(0x18A69, None, "TANGUT COMPONENT-618", 0x31, "Tangut_Components"),
    c(0x18A6A, None, "TANGUT COMPONENT-619", 0x31, "Tangut_Components"),
    c(0x18A6B, None, "TANGUT COMPONENT-620", 0x31, "Tangut_Components"),
    c(0x18A6C, None, "TANGUT COMPONENT-621", 0x31, "Tangut_Components"),
    c(0x18A6D, None, "TANGUT COMPONENT-622", 0x31, "Tangut_Components"),
    c(0x18A6E, None, "TANGUT COMPONENT-623", 0x31, "Tangut_Components"),
    c(0x18A6F, None, "TANGUT COMPONENT-624", 0x31, "Tangut_Components"),
    c(0x18A70, None, "TANGUT COMPONENT-625", 0x31, "Tangut_Components"),
    c(0x18A71, None, "TANGUT COMPONENT-626", 0x31, "Tangut_Components"),
    c(0x18A72, None, "TANGUT COMPONENT-627", 0x31, "Tangut_Components"),
    c(0x18A73, None, "TANGUT COMPONENT-628", 0x31, "Tangut_Components"),
    c(0x18A74, None, "TANGUT COMPONENT-629", 0x31, "Tangut_Components"),
    c(0x18A75, None, "TANGUT COMPONENT-630", 0x31, "Tangut_Components"),
    c(0x18A76, None, "TANGUT COMPONENT-631", 0x31, "Tangut_Components"),
    c(0x18A77, None, "TANGUT COMPONENT-632", 0x31, "Tangut_Components"),
    c(0x18A78, None, "TANGUT COMPONENT-633", 0x31, "Tangut_Components"),
    c(0x18A79, None, "TANGUT COMPONENT-634", 0x31, "Tangut_Components"),
    c(0x18A7A, None, "TANGUT COMPONENT-635", 0x31, "Tangut_Components"),
    c(0x18A7B, None, "TANGUT COMPONENT-636", 0x31, "Tangut_Components"),
    c(0x18A7C, None, "TANGUT COMPONENT-637", 0x31, "Tangut_Components"),
    c(0x18A7D, None, "TANGUT COMPONENT-638", 0x31, "Tangut_Components"),
    c(0x18A7E, None, "TANGUT COMPONENT-639", 0x31, "Tangut_Components"),
    c(0x18A7F, None, "TANGUT COMPONENT-640", 0x31, "Tangut_Components"),
    c(0x18A80, None, "TANGUT COMPONENT-641", 0x31, "Tangut_Components"),
    c(0x18A81, None, "TANGUT COMPONENT-642", 0x31, "Tangut_Components"),
    c(0x18A82, None, "TANGUT COMPONENT-643", 0x31, "Tangut_Components"),
    c(0x18A83, None, "TANGUT COMPONENT-644", 0x31, "Tangut_Components"),
    c(0x18A84, None, "TANGUT COMPONENT-645", 0x31, "Tangut_Components"),
    c(0x18A85, None, "TANGUT COMPONENT-646", 0x31, "Tangut_Components"),
    c(0x18A86, None, "TANGUT COMPONENT-647", 0x31, "Tangut_Components"),
    c(0x18A87, None, "TANGUT COMPONENT-648", 0x31, "Tangut_Components"),
    c(0x18A88, None, "TANGUT COMPONENT-649", 0x31, "Tangut_Components"),
    c(0x18A89, None, "TANGUT COMPONENT-650", 0x31, "Tangut_Components"),
    c(0x18A8A, None, "TANGUT COMPONENT-651", 0x31, "Tangut_Components"),
    c(0x18A8B, None, "TANGUT COMPONENT-652", 0x31, "Tangut_Components"),
    c(0x18A8C, None, "TANGUT COMPONENT-653", 0x31, "Tangut_Components"),
    c(0x18A8D, None, "TANGUT COMPONENT-654", 0x31, "Tangut_Components"),
    c(0x18A8E, None, "TANGUT COMPONENT-655", 0x31, "Tangut_Components"),
    c(0x18A8F, None, "TANGUT COMPONENT-656", 0x31, "Tangut_Components"),
    c(0x18A90, None, "TANGUT COMPONENT-657", 0x31, "Tangut_Components"),
    c(0x18A91, None, "TANGUT COMPONENT-658", 0x31, "Tangut_Components"),
    c(0x18A92, None, "TANGUT COMPONENT-659", 0x31, "Tangut_Components"),
    c(0x18A93, None, "TANGUT COMPONENT-660", 0x31, "Tangut_Components"),
    c(0x18A94, None, "TANGUT COMPONENT-661", 0x31, "Tangut_Components"),
    c(0x18A95, None, "TANGUT COMPONENT-662", 0x31, "Tangut_Components"),
    c(0x18A96, None, "TANGUT COMPONENT-663", 0x31, "Tangut_Components"),
    c(0x18A97, None, "TANGUT COMPONENT-664", 0x31, "Tangut_Components"),
    c(0x18A98, None, "TANGUT COMPONENT-665", 0x31, "Tangut_Components"),
    c(0x18A99, None, "TANGUT COMPONENT-666", 0x31, "Tangut_Components"),
    c(0x18A9A, None, "TANGUT COMPONENT-667", 0x31, "Tangut_Components"),
    c(0x18A9B, None, "TANGUT COMPONENT-668", 0x31, "Tangut_Components"),
    c(0x18A9C, None, "TANGUT COMPONENT-669", 0x31, "Tangut_Components"),
    c(0x18A9D, None, "TANGUT COMPONENT-670", 0x31, "Tangut_Components"),
    c(0x18A9E, None, "TANGUT COMPONENT-671", 0x31, "Tangut_Components"),
    c(0x18A9F, None, "TANGUT COMPONENT-672", 0x31, "Tangut_Components"),
    c(0x18AA0, None, "TANGUT COMPONENT-673", 0x31, "Tangut_Components"),
    c(0x18AA1, None, "TANGUT COMPONENT-674", 0x31, "Tangut_Components"),
    c(0x18AA2, None, "TANGUT COMPONENT-675", 0x31, "Tangut_Components"),
    c(0x18AA3, None, "TANGUT COMPONENT-676", 0x31, "Tangut_Components"),
    c(0x18AA4, None, "TANGUT COMPONENT-677", 0x31, "Tangut_Components"),
    c(0x18AA5, None, "TANGUT COMPONENT-678", 0x31, "Tangut_Components"),
    c(0x18AA6, None, "TANGUT COMPONENT-679", 0x31, "Tangut_Components"),
    c(0x18AA7, None, "TANGUT COMPONENT-680", 0x31, "Tangut_Components"),
    c(0x18AA8, None, "TANGUT COMPONENT-681", 0x31, "Tangut_Components"),
    c(0x18AA9, None, "TANGUT COMPONENT-682", 0x31, "Tangut_Components"),
    c(0x18AAA, None, "TANGUT COMPONENT-683", 0x31, "Tangut_Components"),
    c(0x18AAB, None, "TANGUT COMPONENT-684", 0x31, "Tangut_Components"),
    c(0x18AAC, None, "TANGUT COMPONENT-685", 0x31, "Tangut_Components"),
    c(0x18AAD, None, "TANGUT COMPONENT-686", 0x31, "Tangut_Components"),
    c(0x18AAE, None, "TANGUT COMPONENT-687", 0x31, "Tangut_Components"),
    c(0x18AAF, None, "TANGUT COMPONENT-688", 0x31, "Tangut_Components"),
    c(0x18AB0, None, "TANGUT COMPONENT-689", 0x31, "Tangut_Components"),
    c(0x18AB1, None, "TANGUT COMPONENT-690", 0x31, "Tangut_Components"),
    c(0x18AB2, None, "TANGUT COMPONENT-691", 0x31, "Tangut_Components"),
    c(0x18AB3, None, "TANGUT COMPONENT-692", 0x31, "Tangut_Components"),
    c(0x18AB4, None, "TANGUT COMPONENT-693", 0x31, "Tangut_Components"),
    c(0x18AB5, None, "TANGUT COMPONENT-694", 0x31, "Tangut_Components"),
    c(0x18AB6, None, "TANGUT COMPONENT-695", 0x31, "Tangut_Components"),
    c(0x18AB7, None, "TANGUT COMPONENT-696", 0x31, "Tangut_Components"),
    c(0x18AB8, None, "TANGUT COMPONENT-697", 0x31, "Tangut_Components"),
    c(0x18AB9, None, "TANGUT COMPONENT-698", 0x31, "Tangut_Components"),
    c(0x18ABA, None, "TANGUT COMPONENT-699", 0x31, "Tangut_Components"),
    c(0x18ABB, None, "TANGUT COMPONENT-700", 0x31, "Tangut_Components"),
    c(0x18ABC, None, "TANGUT COMPONENT-701", 0x31, "Tangut_Components"),
    c(0x18ABD, None, "TANGUT COMPONENT-702", 0x31, "Tangut_Components"),
    c(0x18ABE, None, "TANGUT COMPONENT-703", 0x31, "Tangut_Components"),
    c(0x18ABF, None, "TANGUT COMPONENT-704", 0x31, "Tangut_Components"),
    c(0x18AC0, None, "TANGUT COMPONENT-705", 0x31, "Tangut_Components"),
    c(0x18AC1, None, "TANGUT COMPONENT-706", 0x31, "Tangut_Components"),
    c(0x18AC2, None, "TANGUT COMPONENT-707", 0x31, "Tangut_Components"),
    c(0x18AC3, None, "TANGUT COMPONENT-708", 0x31, "Tangut_Components"),
    c(0x18AC4, None, "TANGUT COMPONENT-709", 0x31, "Tangut_Components"),
    c(0x18AC5, None, "TANGUT COMPONENT-710", 0x31, "Tangut_Components"),
    c(0x18AC6, None, "TANGUT COMPONENT-711", 0x31, "Tangut_Components"),
    c(0x18AC7, None, "TANGUT COMPONENT-712", 0x31, "Tangut_Components"),
    c(0x18AC8, None, "TANGUT COMPONENT-713", 0x31, "Tangut_Components"),
    c(0x18AC9, None, "TANGUT COMPONENT-714", 0x31, "Tangut_Components"),
    c(0x18ACA, None, "TANGUT COMPONENT-715", 0x31, "Tangut_Components"),
    c(0x18ACB, None, "TANGUT COMPONENT-716", 0x31, "Tangut_Components"),
    c(0x18ACC, None, "TANGUT COMPONENT-717", 0x31, "Tangut_Components"),
    c(0x18ACD, None, "TANGUT COMPONENT-718", 0x31, "Tangut_Components"),
    c(0x18ACE, None, "TANGUT COMPONENT-719", 0x31, "Tangut_Components"),
    c(0x18ACF, None, "TANGUT COMPONENT-720", 0x31, "Tangut_Components"),
    c(0x18AD0, None, "TANGUT COMPONENT-721", 0x31, "Tangut_Components"),
    c(0x18AD1, None, "TANGUT COMPONENT-722", 0x31, "Tangut_Components"),
    c(0x18AD2, None, "TANGUT COMPONENT-723", 0x31, "Tangut_Components"),
    c(0x18AD3, None, "TANGUT COMPONENT-724", 0x31, "Tangut_Components"),
    c(0x18AD4, None, "TANGUT COMPONENT-725", 0x31, "Tangut_Components"),
    c(0x18AD5, None, "TANGUT COMPONENT-726", 0x31, "Tangut_Components"),
    c(0x18AD6, None, "TANGUT COMPONENT-727", 0x31, "Tangut_Components"),
    c(0x18AD7, None, "TANGUT COMPONENT-728", 0x31, "Tangut_Components"),
    c(0x18AD8, None, "TANGUT COMPONENT-729", 0x31, "Tangut_Components"),
    c(0x18AD9, None, "TANGUT COMPONENT-730", 0x31, "Tangut_Components"),
    c(0x18ADA, None, "TANGUT COMPONENT-731", 0x31, "Tangut_Components"),
    c(0x18ADB, None, "TANGUT COMPONENT-732", 0x31, "Tangut_Components"),
    c(0x18ADC, None, "TANGUT COMPONENT-733", 0x31, "Tangut_Components"),
    c(0x18ADD, None, "TANGUT COMPONENT-734", 0x31, "Tangut_Components"),
    c(0x18ADE, None, "TANGUT COMPONENT-735", 0x31, "Tangut_Components"),
    c(0x18ADF, None, "TANGUT COMPONENT-736", 0x31, "Tangut_Components"),
    c(0x18AE0, None, "TANGUT COMPONENT-737", 0x31, "Tangut_Components"),
    c(0x18AE1, None, "TANGUT COMPONENT-738", 0x31, "Tangut_Components"),
    c(0x18AE2, None, "TANGUT COMPONENT-739", 0x31, "Tangut_Components"),
    c(0x18AE3, None, "TANGUT COMPONENT-740", 0x31, "Tangut_Components"),
    c(0x18AE4, None, "TANGUT COMPONENT-741", 0x31, "Tangut_Components"),
    c(0x18AE5, None, "TANGUT COMPONENT-742", 0x31, "Tangut_Components"),
    c(0x18AE6, None, "TANGUT COMPONENT-743", 0x31, "Tangut_Components"),
    c(0x18AE7, None, "TANGUT COMPONENT-744", 0x31, "Tangut_Components"),
    c(0x18AE8, None, "TANGUT COMPONENT-745", 0x31, "Tangut_Components"),
    c(0x18AE9, None, "TANGUT COMPONENT-746", 0x31, "Tangut_Components"),
    c(0x18AEA, None, "TANGUT COMPONENT-747", 0x31, "Tangut_Components"),
    c(0x18AEB, None, "TANGUT COMPONENT-748", 0x31, "Tangut_Components"),
    c(0x18AEC, None, "TANGUT COMPONENT-749", 0x31, "Tangut_Components"),
    c(0x18AED, None, "TANGUT COMPONENT-750", 0x31, "Tangut_Components"),
    c(0x18AEE, None, "TANGUT COMPONENT-751", 0x31, "Tangut_Components"),
    c(0x18AEF, None, "TANGUT COMPONENT-752", 0x31, "Tangut_Components"),
    c(0x18AF0, None, "TANGUT COMPONENT-753", 0x31, "Tangut_Components"),
    c(0x18AF1, None, "TANGUT COMPONENT-754", 0x31, "Tangut_Components"),
    c(0x18AF2, None, "TANGUT COMPONENT-755", 0x31, "Tangut_Components"),
    c(0x18AF3, None, "TANGUT COMPONENT-756", 0x31, "Tangut_Components"),
    c(0x18AF4, None, "TANGUT COMPONENT-757", 0x31, "Tangut_Components"),
    c(0x18AF5, None, "TANGUT COMPONENT-758", 0x31, "Tangut_Components"),
    c(0x18AF6, None, "TANGUT COMPONENT-759", 0x31, "Tangut_Components"),
    c(0x18AF7, None, "TANGUT COMPONENT-760", 0x31, "Tangut_Components"),
    c(0x18AF8, None, "TANGUT COMPONENT-761", 0x31, "Tangut_Components"),
    c(0x18AF9, None, "TANGUT COMPONENT-762", 0x31, "Tangut_Components"),
    c(0x18AFA, None, "TANGUT COMPONENT-763", 0x31, "Tangut_Components"),
    c(0x18AFB, None, "TANGUT COMPONENT-764", 0x31, "Tangut_Components"),
    c(0x18AFC, None, "TANGUT COMPONENT-765", 0x31, "Tangut_Components"),
    c(0x18AFD, None, "TANGUT COMPONENT-766", 0x31, "Tangut_Components"),
    c(0x18AFE, None, "TANGUT COMPONENT-767", 0x31, "Tangut_Components"),
    c(0x18AFF, None, "TANGUT COMPONENT-768", 0x31, "Tangut_Components"),
    c(0x18B00, Some(0x18CD5), "KHITAN SMALL SCRIPT CHARACTER-#", 0x31, "Khitan_Small_Script"),
    c(0x18D00, Some(0x18D08), "TANGUT IDEOGRAPH SUPPLEMENT-#", 0x31, "Tangut_Sup"),
    c(0x1AFF0, None, "KATAKANA LETTER MINNAN TONE-2", 0x31, "Kana_Ext_B"),
    c(0x1AFF1, None, "KATAKANA LETTER MINNAN TONE-3", 0x31, "Kana_Ext_B"),
    c(0x1AFF2, None, "KATAKANA LETTER MINNAN TONE-4", 0x31, "Kana_Ext_B"),
    c(0x1AFF3, None, "KATAKANA LETTER MINNAN TONE-5", 0x31, "Kana_Ext_B"),
    c(0x1AFF5, None, "KATAKANA LETTER MINNAN TONE-7", 0x31, "Kana_Ext_B"),
    c(0x1AFF6, None, "KATAKANA LETTER MINNAN TONE-8", 0x31, "Kana_Ext_B"),
    c(0x1AFF7, None, "KATAKANA LETTER MINNAN NASALIZED TONE-1", 0x31, "Kana_Ext_B"),
    c(0x1AFF8, None, "KATAKANA LETTER MINNAN NASALIZED TONE-2", 0x31, "Kana_Ext_B"),
    c(0x1AFF9, None, "KATAKANA LETTER MINNAN NASALIZED TONE-3", 0x31, "Kana_Ext_B"),
    c(0x1AFFA, None, "KATAKANA LETTER MINNAN NASALIZED TONE-4", 0x31, "Kana_Ext_B"),
    c(0x1AFFB, None, "KATAKANA LETTER MINNAN NASALIZED TONE-5", 0x31, "Kana_Ext_B"),
    c(0x1AFFD, None, "KATAKANA LETTER MINNAN NASALIZED TONE-7", 0x31, "Kana_Ext_B"),
    c(0x1AFFE, None, "KATAKANA LETTER MINNAN NASALIZED TONE-8", 0x31, "Kana_Ext_B"),
    c(0x1B000, None, "KATAKANA LETTER ARCHAIC E", 0x31, "Kana_Sup"),
    c(0x1B001, None, "HENTAIGANA LETTER E-1", 0x31, "Kana_Sup"),
    c(0x1B002, None, "HENTAIGANA LETTER A-1", 0x31, "Kana_Sup"),
    c(0x1B003, None, "HENTAIGANA LETTER A-2", 0x31, "Kana_Sup"),
    c(0x1B004, None, "HENTAIGANA LETTER A-3", 0x31, "Kana_Sup"),
    c(0x1B005, None, "HENTAIGANA LETTER A-WO", 0x31, "Kana_Sup"),
    c(0x1B006, None, "HENTAIGANA LETTER I-1", 0x31, "Kana_Sup"),
    c(0x1B007, None, "HENTAIGANA LETTER I-2", 0x31, "Kana_Sup"),
    c(0x1B008, None, "HENTAIGANA LETTER I-3", 0x31, "Kana_Sup"),
    c(0x1B009, None, "HENTAIGANA LETTER I-4", 0x31, "Kana_Sup"),
    c(0x1B00A, None, "HENTAIGANA LETTER U-1", 0x31, "Kana_Sup"),
    c(0x1B00B, None, "HENTAIGANA LETTER U-2", 0x31, "Kana_Sup"),
    c(0x1B00C, None, "HENTAIGANA LETTER U-3", 0x31, "Kana_Sup"),
    c(0x1B00D, None, "HENTAIGANA LETTER U-4", 0x31, "Kana_Sup"),
    c(0x1B00E, None, "HENTAIGANA LETTER U-5", 0x31, "Kana_Sup"),
    c(0x1B00F, None, "HENTAIGANA LETTER E-2", 0x31, "Kana_Sup"),
    c(0x1B010, None, "HENTAIGANA LETTER E-3", 0x31, "Kana_Sup"),
    c(0x1B011, None, "HENTAIGANA LETTER E-4", 0x31, "Kana_Sup"),
    c(0x1B012, None, "HENTAIGANA LETTER E-5", 0x31, "Kana_Sup"),
    c(0x1B013, None, "HENTAIGANA LETTER E-6", 0x31, "Kana_Sup"),
    c(0x1B014, None, "HENTAIGANA LETTER O-1", 0x31, "Kana_Sup"),
    c(0x1B015, None, "HENTAIGANA LETTER O-2", 0x31, "Kana_Sup"),
    c(0x1B016, None, "HENTAIGANA LETTER O-3", 0x31, "Kana_Sup"),
    c(0x1B017, None, "HENTAIGANA LETTER KA-1", 0x31, "Kana_Sup"),
    c(0x1B018, None, "HENTAIGANA LETTER KA-2", 0x31, "Kana_Sup"),
    c(0x1B019, None, "HENTAIGANA LETTER KA-3", 0x31, "Kana_Sup"),
    c(0x1B01A, None, "HENTAIGANA LETTER KA-4", 0x31, "Kana_Sup"),
    c(0x1B01B, None, "HENTAIGANA LETTER KA-5", 0x31, "Kana_Sup"),
    c(0x1B01C, None, "HENTAIGANA LETTER KA-6", 0x31, "Kana_Sup"),
    c(0x1B01D, None, "HENTAIGANA LETTER KA-7", 0x31, "Kana_Sup"),
    c(0x1B01E, None, "HENTAIGANA LETTER KA-8", 0x31, "Kana_Sup"),
    c(0x1B01F, None, "HENTAIGANA LETTER KA-9", 0x31, "Kana_Sup"),
    c(0x1B020, None, "HENTAIGANA LETTER KA-10", 0x31, "Kana_Sup"),
    c(0x1B021, None, "HENTAIGANA LETTER KA-11", 0x31, "Kana_Sup"),
    c(0x1B022, None, "HENTAIGANA LETTER KA-KE", 0x31, "Kana_Sup"),
    c(0x1B023, None, "HENTAIGANA LETTER KI-1", 0x31, "Kana_Sup"),
    c(0x1B024, None, "HENTAIGANA LETTER KI-2", 0x31, "Kana_Sup"),
    c(0x1B025, None, "HENTAIGANA LETTER KI-3", 0x31, "Kana_Sup"),
    c(0x1B026, None, "HENTAIGANA LETTER KI-4", 0x31, "Kana_Sup"),
    c(0x1B027, None, "HENTAIGANA LETTER KI-5", 0x31, "Kana_Sup"),
    c(0x1B028, None, "HENTAIGANA LETTER KI-6", 0x31, "Kana_Sup"),
    c(0x1B029, None, "HENTAIGANA LETTER KI-7", 0x31, "Kana_Sup"),
    c(0x1B02A, None, "HENTAIGANA LETTER KI-8", 0x31, "Kana_Sup"),
    c(0x1B02B, None, "HENTAIGANA LETTER KU-1", 0x31, "Kana_Sup"),
    c(0x1B02C, None, "HENTAIGANA LETTER KU-2", 0x31, "Kana_Sup"),
    c(0x1B02D, None, "HENTAIGANA LETTER KU-3", 0x31, "Kana_Sup"),
    c(0x1B02E, None, "HENTAIGANA LETTER KU-4", 0x31, "Kana_Sup"),
    c(0x1B02F, None, "HENTAIGANA LETTER KU-5", 0x31, "Kana_Sup"),
    c(0x1B030, None, "HENTAIGANA LETTER KU-6", 0x31, "Kana_Sup"),
    c(0x1B031, None, "HENTAIGANA LETTER KU-7", 0x31, "Kana_Sup"),
    c(0x1B032, None, "HENTAIGANA LETTER KE-1", 0x31, "Kana_Sup"),
    c(0x1B033, None, "HENTAIGANA LETTER KE-2", 0x31, "Kana_Sup"),
    c(0x1B034, None, "HENTAIGANA LETTER KE-3", 0x31, "Kana_Sup"),
    c(0x1B035, None, "HENTAIGANA LETTER KE-4", 0x31, "Kana_Sup"),
    c(0x1B036, None, "HENTAIGANA LETTER KE-5", 0x31, "Kana_Sup"),
    c(0x1B037, None, "HENTAIGANA LETTER KE-6", 0x31, "Kana_Sup"),
    c(0x1B038, None, "HENTAIGANA LETTER KO-1", 0x31, "Kana_Sup"),
    c(0x1B039, None, "HENTAIGANA LETTER KO-2", 0x31, "Kana_Sup"),
    c(0x1B03A, None, "HENTAIGANA LETTER KO-3", 0x31, "Kana_Sup"),
    c(0x1B03B, None, "HENTAIGANA LETTER KO-KI", 0x31, "Kana_Sup"),
    c(0x1B03C, None, "HENTAIGANA LETTER SA-1", 0x31, "Kana_Sup"),
    c(0x1B03D, None, "HENTAIGANA LETTER SA-2", 0x31, "Kana_Sup"),
    c(0x1B03E, None, "HENTAIGANA LETTER SA-3", 0x31, "Kana_Sup"),
    c(0x1B03F, None, "HENTAIGANA LETTER SA-4", 0x31, "Kana_Sup"),
    c(0x1B040, None, "HENTAIGANA LETTER SA-5", 0x31, "Kana_Sup"),
    c(0x1B041, None, "HENTAIGANA LETTER SA-6", 0x31, "Kana_Sup"),
    c(0x1B042, None, "HENTAIGANA LETTER SA-7", 0x31, "Kana_Sup"),
    c(0x1B043, None, "HENTAIGANA LETTER SA-8", 0x31, "Kana_Sup"),
    c(0x1B044, None, "HENTAIGANA LETTER SI-1", 0x31, "Kana_Sup"),
    c(0x1B045, None, "HENTAIGANA LETTER SI-2", 0x31, "Kana_Sup"),
    c(0x1B046, None, "HENTAIGANA LETTER SI-3", 0x31, "Kana_Sup"),
    c(0x1B047, None, "HENTAIGANA LETTER SI-4", 0x31, "Kana_Sup"),
    c(0x1B048, None, "HENTAIGANA LETTER SI-5", 0x31, "Kana_Sup"),
    c(0x1B049, None, "HENTAIGANA LETTER SI-6", 0x31, "Kana_Sup"),
    c(0x1B04A, None, "HENTAIGANA LETTER SU-1", 0x31, "Kana_Sup"),
    c(0x1B04B, None, "HENTAIGANA LETTER SU-2", 0x31, "Kana_Sup"),
    c(0x1B04C, None, "HENTAIGANA LETTER SU-3", 0x31, "Kana_Sup"),
    c(0x1B04D, None, "HENTAIGANA LETTER SU-4", 0x31, "Kana_Sup"),
    c(0x1B04E, None, "HENTAIGANA LETTER SU-5", 0x31, "Kana_Sup"),
    c(0x1B04F, None, "HENTAIGANA LETTER SU-6", 0x31, "Kana_Sup"),
    c(0x1B050, None, "HENTAIGANA LETTER SU-7", 0x31, "Kana_Sup"),
    c(0x1B051, None, "HENTAIGANA LETTER SU-8", 0x31, "Kana_Sup"),
    c(0x1B052, None, "HENTAIGANA LETTER SE-1", 0x31, "Kana_Sup"),
    c(0x1B053, None, "HENTAIGANA LETTER SE-2", 0x31, "Kana_Sup"),
    c(0x1B054, None, "HENTAIGANA LETTER SE-3", 0x31, "Kana_Sup"),
    c(0x1B055, None, "HENTAIGANA LETTER SE-4", 0x31, "Kana_Sup"),
    c(0x1B056, None, "HENTAIGANA LETTER SE-5", 0x31, "Kana_Sup"),
    c(0x1B057, None, "HENTAIGANA LETTER SO-1", 0x31, "Kana_Sup"),
    c(0x1B058, None, "HENTAIGANA LETTER SO-2", 0x31, "Kana_Sup"),
    c(0x1B059, None, "HENTAIGANA LETTER SO-3", 0x31, "Kana_Sup"),
    c(0x1B05A, None, "HENTAIGANA LETTER SO-4", 0x31, "Kana_Sup"),
    c(0x1B05B, None, "HENTAIGANA LETTER SO-5", 0x31, "Kana_Sup"),
    c(0x1B05C, None, "HENTAIGANA LETTER SO-6", 0x31, "Kana_Sup"),
    c(0x1B05D, None, "HENTAIGANA LETTER SO-7", 0x31, "Kana_Sup"),
    c(0x1B05E, None, "HENTAIGANA LETTER TA-1", 0x31, "Kana_Sup"),
    c(0x1B05F, None, "HENTAIGANA LETTER TA-2", 0x31, "Kana_Sup"),
    c(0x1B060, None, "HENTAIGANA LETTER TA-3", 0x31, "Kana_Sup"),
    c(0x1B061, None, "HENTAIGANA LETTER TA-4", 0x31, "Kana_Sup"),
    c(0x1B062, None, "HENTAIGANA LETTER TI-1", 0x31, "Kana_Sup"),
    c(0x1B063, None, "HENTAIGANA LETTER TI-2", 0x31, "Kana_Sup"),
    c(0x1B064, None, "HENTAIGANA LETTER TI-3", 0x31, "Kana_Sup"),
    c(0x1B065, None, "HENTAIGANA LETTER TI-4", 0x31, "Kana_Sup"),
    c(0x1B066, None, "HENTAIGANA LETTER TI-5", 0x31, "Kana_Sup"),
    c(0x1B067, None, "HENTAIGANA LETTER TI-6", 0x31, "Kana_Sup"),
    c(0x1B068, None, "HENTAIGANA LETTER TI-7", 0x31, "Kana_Sup"),
    c(0x1B069, None, "HENTAIGANA LETTER TU-1", 0x31, "Kana_Sup"),
    c(0x1B06A, None, "HENTAIGANA LETTER TU-2", 0x31, "Kana_Sup"),
    c(0x1B06B, None, "HENTAIGANA LETTER TU-3", 0x31, "Kana_Sup"),
    c(0x1B06C, None, "HENTAIGANA LETTER TU-4", 0x31, "Kana_Sup"),
    c(0x1B06D, None, "HENTAIGANA LETTER TU-TO", 0x31, "Kana_Sup"),
    c(0x1B06E, None, "HENTAIGANA LETTER TE-1", 0x31, "Kana_Sup"),
    c(0x1B06F, None, "HENTAIGANA LETTER TE-2", 0x31, "Kana_Sup"),
    c(0x1B070, None, "HENTAIGANA LETTER TE-3", 0x31, "Kana_Sup"),
    c(0x1B071, None, "HENTAIGANA LETTER TE-4", 0x31, "Kana_Sup"),
    c(0x1B072, None, "HENTAIGANA LETTER TE-5", 0x31, "Kana_Sup"),
    c(0x1B073, None, "HENTAIGANA LETTER TE-6", 0x31, "Kana_Sup"),
    c(0x1B074, None, "HENTAIGANA LETTER TE-7", 0x31, "Kana_Sup"),
    c(0x1B075, None, "HENTAIGANA LETTER TE-8", 0x31, "Kana_Sup"),
    c(0x1B076, None, "HENTAIGANA LETTER TE-9", 0x31, "Kana_Sup"),
    c(0x1B077, None, "HENTAIGANA LETTER TO-1", 0x31, "Kana_Sup"),
    c(0x1B078, None, "HENTAIGANA LETTER TO-2", 0x31, "Kana_Sup"),
    c(0x1B079, None, "HENTAIGANA LETTER TO-3", 0x31, "Kana_Sup"),
    c(0x1B07A, None, "HENTAIGANA LETTER TO-4", 0x31, "Kana_Sup"),
    c(0x1B07B, None, "HENTAIGANA LETTER TO-5", 0x31, "Kana_Sup"),
    c(0x1B07C, None, "HENTAIGANA LETTER TO-6", 0x31, "Kana_Sup"),
    c(0x1B07D, None, "HENTAIGANA LETTER TO-RA", 0x31, "Kana_Sup"),
    c(0x1B07E, None, "HENTAIGANA LETTER NA-1", 0x31, "Kana_Sup"),
    c(0x1B07F, None, "HENTAIGANA LETTER NA-2", 0x31, "Kana_Sup"),
    c(0x1B080, None, "HENTAIGANA LETTER NA-3", 0x31, "Kana_Sup"),
    c(0x1B081, None, "HENTAIGANA LETTER NA-4", 0x31, "Kana_Sup"),
    c(0x1B082, None, "HENTAIGANA LETTER NA-5", 0x31, "Kana_Sup"),
    c(0x1B083, None, "HENTAIGANA LETTER NA-6", 0x31, "Kana_Sup"),
    c(0x1B084, None, "HENTAIGANA LETTER NA-7", 0x31, "Kana_Sup"),
    c(0x1B085, None, "HENTAIGANA LETTER NA-8", 0x31, "Kana_Sup"),
    c(0x1B086, None, "HENTAIGANA LETTER NA-9", 0x31, "Kana_Sup"),
    c(0x1B087, None, "HENTAIGANA LETTER NI-1", 0x31, "Kana_Sup"),
    c(0x1B088, None, "HENTAIGANA LETTER NI-2", 0x31, "Kana_Sup"),
    c(0x1B089, None, "HENTAIGANA LETTER NI-3", 0x31, "Kana_Sup"),
    c(0x1B08A, None, "HENTAIGANA LETTER NI-4", 0x31, "Kana_Sup"),
    c(0x1B08B, None, "HENTAIGANA LETTER NI-5", 0x31, "Kana_Sup"),
    c(0x1B08C, None, "HENTAIGANA LETTER NI-6", 0x31, "Kana_Sup"),
    c(0x1B08D, None, "HENTAIGANA LETTER NI-7", 0x31, "Kana_Sup"),
    c(0x1B08E, None, "HENTAIGANA LETTER NI-TE", 0x31, "Kana_Sup"),
    c(0x1B08F, None, "HENTAIGANA LETTER NU-1", 0x31, "Kana_Sup"),
    c(0x1B090, None, "HENTAIGANA LETTER NU-2", 0x31, "Kana_Sup"),
    c(0x1B091, None, "HENTAIGANA LETTER NU-3", 0x31, "Kana_Sup"),
    c(0x1B092, None, "HENTAIGANA LETTER NE-1", 0x31, "Kana_Sup"),
    c(0x1B093, None, "HENTAIGANA LETTER NE-2", 0x31, "Kana_Sup"),
    c(0x1B094, None, "HENTAIGANA LETTER NE-3", 0x31, "Kana_Sup"),
    c(0x1B095, None, "HENTAIGANA LETTER NE-4", 0x31, "Kana_Sup"),
    c(0x1B096, None, "HENTAIGANA LETTER NE-5", 0x31, "Kana_Sup"),
    c(0x1B097, None, "HENTAIGANA LETTER NE-6", 0x31, "Kana_Sup"),
    c(0x1B098, None, "HENTAIGANA LETTER NE-KO", 0x31, "Kana_Sup"),
    c(0x1B099, None, "HENTAIGANA LETTER NO-1", 0x31, "Kana_Sup"),
    c(0x1B09A, None, "HENTAIGANA LETTER NO-2", 0x31, "Kana_Sup"),
    c(0x1B09B, None, "HENTAIGANA LETTER NO-3", 0x31, "Kana_Sup"),
    c(0x1B09C, None, "HENTAIGANA LETTER NO-4", 0x31, "Kana_Sup"),
    c(0x1B09D, None, "HENTAIGANA LETTER NO-5", 0x31, "Kana_Sup"),
    c(0x1B09E, None, "HENTAIGANA LETTER HA-1", 0x31, "Kana_Sup"),
    c(0x1B09F, None, "HENTAIGANA LETTER HA-2", 0x31, "Kana_Sup"),
    c(0x1B0A0, None, "HENTAIGANA LETTER HA-3", 0x31, "Kana_Sup"),
    c(0x1B0A1, None, "HENTAIGANA LETTER HA-4", 0x31, "Kana_Sup"),
    c(0x1B0A2, None, "HENTAIGANA LETTER HA-5", 0x31, "Kana_Sup"),
    c(0x1B0A3, None, "HENTAIGANA LETTER HA-6", 0x31, "Kana_Sup"),
    c(0x1B0A4, None, "HENTAIGANA LETTER HA-7", 0x31, "Kana_Sup"),
    c(0x1B0A5, None, "HENTAIGANA LETTER HA-8", 0x31, "Kana_Sup"),
    c(0x1B0A6, None, "HENTAIGANA LETTER HA-9", 0x31, "Kana_Sup"),
    c(0x1B0A7, None, "HENTAIGANA LETTER HA-10", 0x31, "Kana_Sup"),
    c(0x1B0A8, None, "HENTAIGANA LETTER HA-11", 0x31, "Kana_Sup"),
    c(0x1B0A9, None, "HENTAIGANA LETTER HI-1", 0x31, "Kana_Sup"),
    c(0x1B0AA, None, "HENTAIGANA LETTER HI-2", 0x31, "Kana_Sup"),
    c(0x1B0AB, None, "HENTAIGANA LETTER HI-3", 0x31, "Kana_Sup"),
    c(0x1B0AC, None, "HENTAIGANA LETTER HI-4", 0x31, "Kana_Sup"),
    c(0x1B0AD, None, "HENTAIGANA LETTER HI-5", 0x31, "Kana_Sup"),
    c(0x1B0AE, None, "HENTAIGANA LETTER HI-6", 0x31, "Kana_Sup"),
    c(0x1B0AF, None, "HENTAIGANA LETTER HI-7", 0x31, "Kana_Sup"),
    c(0x1B0B0, None, "HENTAIGANA LETTER HU-1", 0x31, "Kana_Sup"),
    c(0x1B0B1, None, "HENTAIGANA LETTER HU-2", 0x31, "Kana_Sup"),
    c(0x1B0B2, None, "HENTAIGANA LETTER HU-3", 0x31, "Kana_Sup"),
    c(0x1B0B3, None, "HENTAIGANA LETTER HE-1", 0x31, "Kana_Sup"),
    c(0x1B0B4, None, "HENTAIGANA LETTER HE-2", 0x31, "Kana_Sup"),
    c(0x1B0B5, None, "HENTAIGANA LETTER HE-3", 0x31, "Kana_Sup"),
    c(0x1B0B6, None, "HENTAIGANA LETTER HE-4", 0x31, "Kana_Sup"),
    c(0x1B0B7, None, "HENTAIGANA LETTER HE-5", 0x31, "Kana_Sup"),
    c(0x1B0B8, None, "HENTAIGANA LETTER HE-6", 0x31, "Kana_Sup"),
    c(0x1B0B9, None, "HENTAIGANA LETTER HE-7", 0x31, "Kana_Sup"),
    c(0x1B0BA, None, "HENTAIGANA LETTER HO-1", 0x31, "Kana_Sup"),
    c(0x1B0BB, None, "HENTAIGANA LETTER HO-2", 0x31, "Kana_Sup"),
    c(0x1B0BC, None, "HENTAIGANA LETTER HO-3", 0x31, "Kana_Sup"),
    c(0x1B0BD, None, "HENTAIGANA LETTER HO-4", 0x31, "Kana_Sup"),
    c(0x1B0BE, None, "HENTAIGANA LETTER HO-5", 0x31, "Kana_Sup"),
    c(0x1B0BF, None, "HENTAIGANA LETTER HO-6", 0x31, "Kana_Sup"),
    c(0x1B0C0, None, "HENTAIGANA LETTER HO-7", 0x31, "Kana_Sup"),
    c(0x1B0C1, None, "HENTAIGANA LETTER HO-8", 0x31, "Kana_Sup"),
    c(0x1B0C2, None, "HENTAIGANA LETTER MA-1", 0x31, "Kana_Sup"),
    c(0x1B0C3, None, "HENTAIGANA LETTER MA-2", 0x31, "Kana_Sup"),
    c(0x1B0C4, None, "HENTAIGANA LETTER MA-3", 0x31, "Kana_Sup"),
    c(0x1B0C5, None, "HENTAIGANA LETTER MA-4", 0x31, "Kana_Sup"),
    c(0x1B0C6, None, "HENTAIGANA LETTER MA-5", 0x31, "Kana_Sup"),
    c(0x1B0C7, None, "HENTAIGANA LETTER MA-6", 0x31, "Kana_Sup"),
    c(0x1B0C8, None, "HENTAIGANA LETTER MA-7", 0x31, "Kana_Sup"),
    c(0x1B0C9, None, "HENTAIGANA LETTER MI-1", 0x31, "Kana_Sup"),
    c(0x1B0CA, None, "HENTAIGANA LETTER MI-2", 0x31, "Kana_Sup"),
    c(0x1B0CB, None, "HENTAIGANA LETTER MI-3", 0x31, "Kana_Sup"),
    c(0x1B0CC, None, "HENTAIGANA LETTER MI-4", 0x31, "Kana_Sup"),
    c(0x1B0CD, None, "HENTAIGANA LETTER MI-5", 0x31, "Kana_Sup"),
    c(0x1B0CE, None, "HENTAIGANA LETTER MI-6", 0x31, "Kana_Sup"),
    c(0x1B0CF, None, "HENTAIGANA LETTER MI-7", 0x31, "Kana_Sup"),
    c(0x1B0D0, None, "HENTAIGANA LETTER MU-1", 0x31, "Kana_Sup"),
    c(0x1B0D1, None, "HENTAIGANA LETTER MU-2", 0x31, "Kana_Sup"),
    c(0x1B0D2, None, "HENTAIGANA LETTER MU-3", 0x31, "Kana_Sup"),
    c(0x1B0D3, None, "HENTAIGANA LETTER MU-4", 0x31, "Kana_Sup"),
    c(0x1B0D4, None, "HENTAIGANA LETTER ME-1", 0x31, "Kana_Sup"),
    c(0x1B0D5, None, "HENTAIGANA LETTER ME-2", 0x31, "Kana_Sup"),
    c(0x1B0D6, None, "HENTAIGANA LETTER ME-MA", 0x31, "Kana_Sup"),
    c(0x1B0D7, None, "HENTAIGANA LETTER MO-1", 0x31, "Kana_Sup"),
    c(0x1B0D8, None, "HENTAIGANA LETTER MO-2", 0x31, "Kana_Sup"),
    c(0x1B0D9, None, "HENTAIGANA LETTER MO-3", 0x31, "Kana_Sup"),
    c(0x1B0DA, None, "HENTAIGANA LETTER MO-4", 0x31, "Kana_Sup"),
    c(0x1B0DB, None, "HENTAIGANA LETTER MO-5", 0x31, "Kana_Sup"),
    c(0x1B0DC, None, "HENTAIGANA LETTER MO-6", 0x31, "Kana_Sup"),
    c(0x1B0DD, None, "HENTAIGANA LETTER YA-1", 0x31, "Kana_Sup"),
    c(0x1B0DE, None, "HENTAIGANA LETTER YA-2", 0x31, "Kana_Sup"),
    c(0x1B0DF, None, "HENTAIGANA LETTER YA-3", 0x31, "Kana_Sup"),
    c(0x1B0E0, None, "HENTAIGANA LETTER YA-4", 0x31, "Kana_Sup"),
    c(0x1B0E1, None, "HENTAIGANA LETTER YA-5", 0x31, "Kana_Sup"),
    c(0x1B0E2, None, "HENTAIGANA LETTER YA-YO", 0x31, "Kana_Sup"),
    c(0x1B0E3, None, "HENTAIGANA LETTER YU-1", 0x31, "Kana_Sup"),
    c(0x1B0E4, None, "HENTAIGANA LETTER YU-2", 0x31, "Kana_Sup"),
    c(0x1B0E5, None, "HENTAIGANA LETTER YU-3", 0x31, "Kana_Sup"),
    c(0x1B0E6, None, "HENTAIGANA LETTER YU-4", 0x31, "Kana_Sup"),
    c(0x1B0E7, None, "HENTAIGANA LETTER YO-1", 0x31, "Kana_Sup"),
    c(0x1B0E8, None, "HENTAIGANA LETTER YO-2", 0x31, "Kana_Sup"),
    c(0x1B0E9, None, "HENTAIGANA LETTER YO-3", 0x31, "Kana_Sup"),
    c(0x1B0EA, None, "HENTAIGANA LETTER YO-4", 0x31, "Kana_Sup"),
    c(0x1B0EB, None, "HENTAIGANA LETTER YO-5", 0x31, "Kana_Sup"),
    c(0x1B0EC, None, "HENTAIGANA LETTER YO-6", 0x31, "Kana_Sup"),
    c(0x1B0ED, None, "HENTAIGANA LETTER RA-1", 0x31, "Kana_Sup"),
    c(0x1B0EE, None, "HENTAIGANA LETTER RA-2", 0x31, "Kana_Sup"),
    c(0x1B0EF, None, "HENTAIGANA LETTER RA-3", 0x31, "Kana_Sup"),
    c(0x1B0F0, None, "HENTAIGANA LETTER RA-4", 0x31, "Kana_Sup"),
    c(0x1B0F1, None, "HENTAIGANA LETTER RI-1", 0x31, "Kana_Sup"),
    c(0x1B0F2, None, "HENTAIGANA LETTER RI-2", 0x31, "Kana_Sup"),
    c(0x1B0F3, None, "HENTAIGANA LETTER RI-3", 0x31, "Kana_Sup"),
    c(0x1B0F4, None, "HENTAIGANA LETTER RI-4", 0x31, "Kana_Sup"),
    c(0x1B0F5, None, "HENTAIGANA LETTER RI-5", 0x31, "Kana_Sup"),
    c(0x1B0F6, None, "HENTAIGANA LETTER RI-6", 0x31, "Kana_Sup"),
    c(0x1B0F7, None, "HENTAIGANA LETTER RI-7", 0x31, "Kana_Sup"),
    c(0x1B0F8, None, "HENTAIGANA LETTER RU-1", 0x31, "Kana_Sup"),
    c(0x1B0F9, None, "HENTAIGANA LETTER RU-2", 0x31, "Kana_Sup"),
    c(0x1B0FA, None, "HENTAIGANA LETTER RU-3", 0x31, "Kana_Sup"),
    c(0x1B0FB, None, "HENTAIGANA LETTER RU-4", 0x31, "Kana_Sup"),
    c(0x1B0FC, None, "HENTAIGANA LETTER RU-5", 0x31, "Kana_Sup"),
    c(0x1B0FD, None, "HENTAIGANA LETTER RU-6", 0x31, "Kana_Sup"),
    c(0x1B0FE, None, "HENTAIGANA LETTER RE-1", 0x31, "Kana_Sup"),
    c(0x1B0FF, None, "HENTAIGANA LETTER RE-2", 0x31, "Kana_Sup"),
    c(0x1B100, None, "HENTAIGANA LETTER RE-3", 0x31, "Kana_Ext_A"),
    c(0x1B101, None, "HENTAIGANA LETTER RE-4", 0x31, "Kana_Ext_A"),
    c(0x1B102, None, "HENTAIGANA LETTER RO-1", 0x31, "Kana_Ext_A"),
    c(0x1B103, None, "HENTAIGANA LETTER RO-2", 0x31, "Kana_Ext_A"),
    c(0x1B104, None, "HENTAIGANA LETTER RO-3", 0x31, "Kana_Ext_A"),
    c(0x1B105, None, "HENTAIGANA LETTER RO-4", 0x31, "Kana_Ext_A"),
    c(0x1B106, None, "HENTAIGANA LETTER RO-5", 0x31, "Kana_Ext_A"),
    c(0x1B107, None, "HENTAIGANA LETTER RO-6", 0x31, "Kana_Ext_A"),
    c(0x1B108, None, "HENTAIGANA LETTER WA-1", 0x31, "Kana_Ext_A"),
    c(0x1B109, None, "HENTAIGANA LETTER WA-2", 0x31, "Kana_Ext_A"),
    c(0x1B10A, None, "HENTAIGANA LETTER WA-3", 0x31, "Kana_Ext_A"),
    c(0x1B10B, None, "HENTAIGANA LETTER WA-4", 0x31, "Kana_Ext_A"),
    c(0x1B10C, None, "HENTAIGANA LETTER WA-5", 0x31, "Kana_Ext_A"),
    c(0x1B10D, None, "HENTAIGANA LETTER WI-1", 0x31, "Kana_Ext_A"),
    c(0x1B10E, None, "HENTAIGANA LETTER WI-2", 0x31, "Kana_Ext_A"),
    c(0x1B10F, None, "HENTAIGANA LETTER WI-3", 0x31, "Kana_Ext_A"),
    c(0x1B110, None, "HENTAIGANA LETTER WI-4", 0x31, "Kana_Ext_A"),
    c(0x1B111, None, "HENTAIGANA LETTER WI-5", 0x31, "Kana_Ext_A"),
    c(0x1B112, None, "HENTAIGANA LETTER WE-1", 0x31, "Kana_Ext_A"),
    c(0x1B113, None, "HENTAIGANA LETTER WE-2", 0x31, "Kana_Ext_A"),
    c(0x1B114, None, "HENTAIGANA LETTER WE-3", 0x31, "Kana_Ext_A"),
    c(0x1B115, None, "HENTAIGANA LETTER WE-4", 0x31, "Kana_Ext_A"),
    c(0x1B116, None, "HENTAIGANA LETTER WO-1", 0x31, "Kana_Ext_A"),
    c(0x1B117, None, "HENTAIGANA LETTER WO-2", 0x31, "Kana_Ext_A"),
    c(0x1B118, None, "HENTAIGANA LETTER WO-3", 0x31, "Kana_Ext_A"),
    c(0x1B119, None, "HENTAIGANA LETTER WO-4", 0x31, "Kana_Ext_A"),
    c(0x1B11A, None, "HENTAIGANA LETTER WO-5", 0x31, "Kana_Ext_A"),
    c(0x1B11B, None, "HENTAIGANA LETTER WO-6", 0x31, "Kana_Ext_A"),
    c(0x1B11C, None, "HENTAIGANA LETTER WO-7", 0x31, "Kana_Ext_A"),
    c(0x1B11D, None, "HENTAIGANA LETTER N-MU-MO-1", 0x31, "Kana_Ext_A"),
    c(0x1B11E, None, "HENTAIGANA LETTER N-MU-MO-2", 0x31, "Kana_Ext_A"),
    c(0x1B11F, None, "HIRAGANA LETTER ARCHAIC WU", 0x31, "Kana_Ext_A"),
    c(0x1B120, None, "KATAKANA LETTER ARCHAIC YI", 0x31, "Kana_Ext_A"),
    c(0x1B121, None, "KATAKANA LETTER ARCHAIC YE", 0x31, "Kana_Ext_A"),
    c(0x1B122, None, "KATAKANA LETTER ARCHAIC WU", 0x31, "Kana_Ext_A"),
    c(0x1B150, None, "HIRAGANA LETTER SMALL WI", 0x31, "Small_Kana_Ext"),
    c(0x1B151, None, "HIRAGANA LETTER SMALL WE", 0x31, "Small_Kana_Ext"),
    c(0x1B152, None, "HIRAGANA LETTER SMALL WO", 0x31, "Small_Kana_Ext"),
    c(0x1B164, None, "KATAKANA LETTER SMALL WI", 0x31, "Small_Kana_Ext"),
    c(0x1B165, None, "KATAKANA LETTER SMALL WE", 0x31, "Small_Kana_Ext"),
    c(0x1B166, None, "KATAKANA LETTER SMALL WO", 0x31, "Small_Kana_Ext"),
    c(0x1B167, None, "KATAKANA LETTER SMALL N", 0x31, "Small_Kana_Ext"),
    c(0x1B170, Some(0x1B2FB), "NUSHU CHARACTER-#", 0x31, "Nushu"),
    c(0x1BC00, None, "DUPLOYAN LETTER H", 0x31, "Duployan"),
    c(0x1BC01, None, "DUPLOYAN LETTER X", 0x31, "Duployan"),
    c(0x1BC02, None, "DUPLOYAN LETTER P", 0x31, "Duployan"),
    c(0x1BC03, None, "DUPLOYAN LETTER T", 0x31, "Duployan"),
    c(0x1BC04, None, "DUPLOYAN LETTER F", 0x31, "Duployan"),
    c(0x1BC05, None, "DUPLOYAN LETTER K", 0x31, "Duployan"),
    c(0x1BC06, None, "DUPLOYAN LETTER L", 0x31, "Duployan"),
    c(0x1BC07, None, "DUPLOYAN LETTER B", 0x31, "Duployan"),
    c(0x1BC08, None, "DUPLOYAN LETTER D", 0x31, "Duployan"),
    c(0x1BC09, None, "DUPLOYAN LETTER V", 0x31, "Duployan"),
    c(0x1BC0A, None, "DUPLOYAN LETTER G", 0x31, "Duployan"),
    c(0x1BC0B, None, "DUPLOYAN LETTER R", 0x31, "Duployan"),
    c(0x1BC0C, None, "DUPLOYAN LETTER P N", 0x31, "Duployan"),
    c(0x1BC0D, None, "DUPLOYAN LETTER D S", 0x31, "Duployan"),
    c(0x1BC0E, None, "DUPLOYAN LETTER F N", 0x31, "Duployan"),
    c(0x1BC0F, None, "DUPLOYAN LETTER K M", 0x31, "Duployan"),
    c(0x1BC10, None, "DUPLOYAN LETTER R S", 0x31, "Duployan"),
    c(0x1BC11, None, "DUPLOYAN LETTER TH", 0x31, "Duployan"),
    c(0x1BC12, None, "DUPLOYAN LETTER SLOAN DH", 0x31, "Duployan"),
    c(0x1BC13, None, "DUPLOYAN LETTER DH", 0x31, "Duployan"),
    c(0x1BC14, None, "DUPLOYAN LETTER KK", 0x31, "Duployan"),
    c(0x1BC15, None, "DUPLOYAN LETTER SLOAN J", 0x31, "Duployan"),
    c(0x1BC16, None, "DUPLOYAN LETTER HL", 0x31, "Duployan"),
    c(0x1BC17, None, "DUPLOYAN LETTER LH", 0x31, "Duployan"),
    c(0x1BC18, None, "DUPLOYAN LETTER RH", 0x31, "Duployan"),
    c(0x1BC19, None, "DUPLOYAN LETTER M", 0x31, "Duployan"),
    c(0x1BC1A, None, "DUPLOYAN LETTER N", 0x31, "Duployan"),
    c(0x1BC1B, None, "DUPLOYAN LETTER J", 0x31, "Duployan"),
    c(0x1BC1C, None, "DUPLOYAN LETTER S", 0x31, "Duployan"),
    c(0x1BC1D, None, "DUPLOYAN LETTER M N", 0x31, "Duployan"),
    c(0x1BC1E, None, "DUPLOYAN LETTER N M", 0x31, "Duployan"),
    c(0x1BC1F, None, "DUPLOYAN LETTER J M", 0x31, "Duployan"),
    c(0x1BC20, None, "DUPLOYAN LETTER S J", 0x31, "Duployan"),
    c(0x1BC21, None, "DUPLOYAN LETTER M WITH DOT", 0x31, "Duployan"),
    c(0x1BC22, None, "DUPLOYAN LETTER N WITH DOT", 0x31, "Duployan"),
    c(0x1BC23, None, "DUPLOYAN LETTER J WITH DOT", 0x31, "Duployan"),
    c(0x1BC24, None, "DUPLOYAN LETTER J WITH DOTS INSIDE AND ABOVE", 0x31, "Duployan"),
    c(0x1BC25, None, "DUPLOYAN LETTER S WITH DOT", 0x31, "Duployan"),
    c(0x1BC26, None, "DUPLOYAN LETTER S WITH DOT BELOW", 0x31, "Duployan"),
    c(0x1BC27, None, "DUPLOYAN LETTER M S", 0x31, "Duployan"),
    c(0x1BC28, None, "DUPLOYAN LETTER N S", 0x31, "Duployan"),
    c(0x1BC29, None, "DUPLOYAN LETTER J S", 0x31, "Duployan"),
    c(0x1BC2A, None, "DUPLOYAN LETTER S S", 0x31, "Duployan"),
    c(0x1BC2B, None, "DUPLOYAN LETTER M N S", 0x31, "Duployan"),
    c(0x1BC2C, None, "DUPLOYAN LETTER N M S", 0x31, "Duployan"),
    c(0x1BC2D, None, "DUPLOYAN LETTER J M S", 0x31, "Duployan"),
    c(0x1BC2E, None, "DUPLOYAN LETTER S J S", 0x31, "Duployan"),
    c(0x1BC2F, None, "DUPLOYAN LETTER J S WITH DOT", 0x31, "Duployan"),
    c(0x1BC30, None, "DUPLOYAN LETTER J N", 0x31, "Duployan"),
    c(0x1BC31, None, "DUPLOYAN LETTER J N S", 0x31, "Duployan"),
    c(0x1BC32, None, "DUPLOYAN LETTER S T", 0x31, "Duployan"),
    c(0x1BC33, None, "DUPLOYAN LETTER S T R", 0x31, "Duployan"),
    c(0x1BC34, None, "DUPLOYAN LETTER S P", 0x31, "Duployan"),
    c(0x1BC35, None, "DUPLOYAN LETTER S P R", 0x31, "Duployan"),
    c(0x1BC36, None, "DUPLOYAN LETTER T S", 0x31, "Duployan"),
    c(0x1BC37, None, "DUPLOYAN LETTER T R S", 0x31, "Duployan"),
    c(0x1BC38, None, "DUPLOYAN LETTER W", 0x31, "Duployan"),
    c(0x1BC39, None, "DUPLOYAN LETTER WH", 0x31, "Duployan"),
    c(0x1BC3A, None, "DUPLOYAN LETTER W R", 0x31, "Duployan"),
    c(0x1BC3B, None, "DUPLOYAN LETTER S N", 0x31, "Duployan"),
    c(0x1BC3C, None, "DUPLOYAN LETTER S M", 0x31, "Duployan"),
    c(0x1BC3D, None, "DUPLOYAN LETTER K R S", 0x31, "Duployan"),
    c(0x1BC3E, None, "DUPLOYAN LETTER G R S", 0x31, "Duployan"),
    c(0x1BC3F, None, "DUPLOYAN LETTER S K", 0x31, "Duployan"),
    c(0x1BC40, None, "DUPLOYAN LETTER S K R", 0x31, "Duployan"),
    c(0x1BC41, None, "DUPLOYAN LETTER A", 0x31, "Duployan"),
    c(0x1BC42, None, "DUPLOYAN LETTER SLOAN OW", 0x31, "Duployan"),
    c(0x1BC43, None, "DUPLOYAN LETTER OA", 0x31, "Duployan"),
    c(0x1BC44, None, "DUPLOYAN LETTER O", 0x31, "Duployan"),
    c(0x1BC45, None, "DUPLOYAN LETTER AOU", 0x31, "Duployan"),
    c(0x1BC46, None, "DUPLOYAN LETTER I", 0x31, "Duployan"),
    c(0x1BC47, None, "DUPLOYAN LETTER E", 0x31, "Duployan"),
    c(0x1BC48, None, "DUPLOYAN LETTER IE", 0x31, "Duployan"),
    c(0x1BC49, None, "DUPLOYAN LETTER SHORT I", 0x31, "Duployan"),
    c(0x1BC4A, None, "DUPLOYAN LETTER UI", 0x31, "Duployan"),
    c(0x1BC4B, None, "DUPLOYAN LETTER EE", 0x31, "Duployan"),
    c(0x1BC4C, None, "DUPLOYAN LETTER SLOAN EH", 0x31, "Duployan"),
    c(0x1BC4D, None, "DUPLOYAN LETTER ROMANIAN I", 0x31, "Duployan"),
    c(0x1BC4E, None, "DUPLOYAN LETTER SLOAN EE", 0x31, "Duployan"),
    c(0x1BC4F, None, "DUPLOYAN LETTER LONG I", 0x31, "Duployan"),
    c(0x1BC50, None, "DUPLOYAN LETTER YE", 0x31, "Duployan"),
    c(0x1BC51, None, "DUPLOYAN LETTER U", 0x31, "Duployan"),
    c(0x1BC52, None, "DUPLOYAN LETTER EU", 0x31, "Duployan"),
    c(0x1BC53, None, "DUPLOYAN LETTER XW", 0x31, "Duployan"),
    c(0x1BC54, None, "DUPLOYAN LETTER U N", 0x31, "Duployan"),
    c(0x1BC55, None, "DUPLOYAN LETTER LONG U", 0x31, "Duployan"),
    c(0x1BC56, None, "DUPLOYAN LETTER ROMANIAN U", 0x31, "Duployan"),
    c(0x1BC57, None, "DUPLOYAN LETTER UH", 0x31, "Duployan"),
    c(0x1BC58, None, "DUPLOYAN LETTER SLOAN U", 0x31, "Duployan"),
    c(0x1BC59, None, "DUPLOYAN LETTER OOH", 0x31, "Duployan"),
    c(0x1BC5A, None, "DUPLOYAN LETTER OW", 0x31, "Duployan"),
    c(0x1BC5B, None, "DUPLOYAN LETTER OU", 0x31, "Duployan"),
    c(0x1BC5C, None, "DUPLOYAN LETTER WA", 0x31, "Duployan"),
    c(0x1BC5D, None, "DUPLOYAN LETTER WO", 0x31, "Duployan"),
    c(0x1BC5E, None, "DUPLOYAN LETTER WI", 0x31, "Duployan"),
    c(0x1BC5F, None, "DUPLOYAN LETTER WEI", 0x31, "Duployan"),
    c(0x1BC60, None, "DUPLOYAN LETTER WOW", 0x31, "Duployan"),
    c(0x1BC61, None, "DUPLOYAN LETTER NASAL U", 0x31, "Duployan"),
    c(0x1BC62, None, "DUPLOYAN LETTER NASAL O", 0x31, "Duployan"),
    c(0x1BC63, None, "DUPLOYAN LETTER NASAL I", 0x31, "Duployan"),
    c(0x1BC64, None, "DUPLOYAN LETTER NASAL A", 0x31, "Duployan"),
    c(0x1BC65, None, "DUPLOYAN LETTER PERNIN AN", 0x31, "Duployan"),
    c(0x1BC66, None, "DUPLOYAN LETTER PERNIN AM", 0x31, "Duployan"),
    c(0x1BC67, None, "DUPLOYAN LETTER SLOAN EN", 0x31, "Duployan"),
    c(0x1BC68, None, "DUPLOYAN LETTER SLOAN AN", 0x31, "Duployan"),
    c(0x1BC69, None, "DUPLOYAN LETTER SLOAN ON", 0x31, "Duployan"),
    c(0x1BC6A, None, "DUPLOYAN LETTER VOCALIC M", 0x31, "Duployan"),
    c(0x1BC70, None, "DUPLOYAN AFFIX LEFT HORIZONTAL SECANT", 0x31, "Duployan"),
    c(0x1BC71, None, "DUPLOYAN AFFIX MID HORIZONTAL SECANT", 0x31, "Duployan"),
    c(0x1BC72, None, "DUPLOYAN AFFIX RIGHT HORIZONTAL SECANT", 0x31, "Duployan"),
    c(0x1BC73, None, "DUPLOYAN AFFIX LOW VERTICAL SECANT", 0x31, "Duployan"),
    c(0x1BC74, None, "DUPLOYAN AFFIX MID VERTICAL SECANT", 0x31, "Duployan"),
    c(0x1BC75, None, "DUPLOYAN AFFIX HIGH VERTICAL SECANT", 0x31, "Duployan"),
    c(0x1BC76, None, "DUPLOYAN AFFIX ATTACHED SECANT", 0x31, "Duployan"),
    c(0x1BC77, None, "DUPLOYAN AFFIX ATTACHED LEFT-TO-RIGHT SECANT", 0x31, "Duployan"),
    c(0x1BC78, None, "DUPLOYAN AFFIX ATTACHED TANGENT", 0x31, "Duployan"),
    c(0x1BC79, None, "DUPLOYAN AFFIX ATTACHED TAIL", 0x31, "Duployan"),
    c(0x1BC7A, None, "DUPLOYAN AFFIX ATTACHED E HOOK", 0x31, "Duployan"),
    c(0x1BC7B, None, "DUPLOYAN AFFIX ATTACHED I HOOK", 0x31, "Duployan"),
    c(0x1BC7C, None, "DUPLOYAN AFFIX ATTACHED TANGENT HOOK", 0x31, "Duployan"),
    c(0x1BC80, None, "DUPLOYAN AFFIX HIGH ACUTE", 0x31, "Duployan"),
    c(0x1BC81, None, "DUPLOYAN AFFIX HIGH TIGHT ACUTE", 0x31, "Duployan"),
    c(0x1BC82, None, "DUPLOYAN AFFIX HIGH GRAVE", 0x31, "Duployan"),
    c(0x1BC83, None, "DUPLOYAN AFFIX HIGH LONG GRAVE", 0x31, "Duployan"),
    c(0x1BC84, None, "DUPLOYAN AFFIX HIGH DOT", 0x31, "Duployan"),
    c(0x1BC85, None, "DUPLOYAN AFFIX HIGH CIRCLE", 0x31, "Duployan"),
    c(0x1BC86, None, "DUPLOYAN AFFIX HIGH LINE", 0x31, "Duployan"),
    c(0x1BC87, None, "DUPLOYAN AFFIX HIGH WAVE", 0x31, "Duployan"),
    c(0x1BC88, None, "DUPLOYAN AFFIX HIGH VERTICAL", 0x31, "Duployan"),
    c(0x1BC90, None, "DUPLOYAN AFFIX LOW ACUTE", 0x31, "Duployan"),
    c(0x1BC91, None, "DUPLOYAN AFFIX LOW TIGHT ACUTE", 0x31, "Duployan"),
    c(0x1BC92, None, "DUPLOYAN AFFIX LOW GRAVE", 0x31, "Duployan"),
    c(0x1BC93, None, "DUPLOYAN AFFIX LOW LONG GRAVE", 0x31, "Duployan"),
    c(0x1BC94, None, "DUPLOYAN AFFIX LOW DOT", 0x31, "Duployan"),
    c(0x1BC95, None, "DUPLOYAN AFFIX LOW CIRCLE", 0x31, "Duployan"),
    c(0x1BC96, None, "DUPLOYAN AFFIX LOW LINE", 0x31, "Duployan"),
    c(0x1BC97, None, "DUPLOYAN AFFIX LOW WAVE", 0x31, "Duployan"),
    c(0x1BC98, None, "DUPLOYAN AFFIX LOW VERTICAL", 0x31, "Duployan"),
    c(0x1BC99, None, "DUPLOYAN AFFIX LOW ARROW", 0x31, "Duployan"),
    c(0x1BC9C, None, "DUPLOYAN SIGN O WITH CROSS", 0x00, "Duployan"),
    c(0x1BC9D, None, "DUPLOYAN THICK LETTER SELECTOR", 0x20, "Duployan"),
    c(0x1BC9E, None, "DUPLOYAN DOUBLE MARK", 0x21, "Duployan"),
    c(0x1BC9F, None, "DUPLOYAN PUNCTUATION CHINOOK FULL STOP", 0x00, "Duployan"),
    c(0x1BCA0, None, "SHORTHAND FORMAT LETTER OVERLAP", 0x00, "Shorthand_Format_Controls"),
    c(0x1BCA1, None, "SHORTHAND FORMAT CONTINUING OVERLAP", 0x00, "Shorthand_Format_Controls"),
    c(0x1BCA2, None, "SHORTHAND FORMAT DOWN STEP", 0x00, "Shorthand_Format_Controls"),
    c(0x1BCA3, None, "SHORTHAND FORMAT UP STEP", 0x00, "Shorthand_Format_Controls"),
    c(0x1CF00, None, "ZNAMENNY COMBINING MARK GORAZDO NIZKO S KRYZHEM ON LEFT", 0x20, "Znamenny_Music"),
    c(0x1CF01, None, "ZNAMENNY COMBINING MARK NIZKO S KRYZHEM ON LEFT", 0x20, "Znamenny_Music"),
    c(0x1CF02, None, "ZNAMENNY COMBINING MARK TSATA ON LEFT", 0x20, "Znamenny_Music"),
    c(0x1CF03, None, "ZNAMENNY COMBINING MARK GORAZDO NIZKO ON LEFT", 0x20, "Znamenny_Music"),
    c(0x1CF04, None, "ZNAMENNY COMBINING MARK NIZKO ON LEFT", 0x20, "Znamenny_Music"),
    c(0x1CF05, None, "ZNAMENNY COMBINING MARK SREDNE ON LEFT", 0x20, "Znamenny_Music"),
    c(0x1CF06, None, "ZNAMENNY COMBINING MARK MALO POVYSHE ON LEFT", 0x20, "Znamenny_Music"),
    c(0x1CF07, None, "ZNAMENNY COMBINING MARK POVYSHE ON LEFT", 0x20, "Znamenny_Music"),
    c(0x1CF08, None, "ZNAMENNY COMBINING MARK VYSOKO ON LEFT", 0x20, "Znamenny_Music"),
    c(0x1CF09, None, "ZNAMENNY COMBINING MARK MALO POVYSHE S KHOKHLOM ON LEFT", 0x20, "Znamenny_Music"),
    c(0x1CF0A, None, "ZNAMENNY COMBINING MARK POVYSHE S KHOKHLOM ON LEFT", 0x20, "Znamenny_Music"),
    c(0x1CF0B, None, "ZNAMENNY COMBINING MARK VYSOKO S KHOKHLOM ON LEFT", 0x20, "Znamenny_Music"),
    c(0x1CF0C, None, "ZNAMENNY COMBINING MARK GORAZDO NIZKO S KRYZHEM ON RIGHT", 0x20, "Znamenny_Music"),
    c(0x1CF0D, None, "ZNAMENNY COMBINING MARK NIZKO S KRYZHEM ON RIGHT", 0x20, "Znamenny_Music"),
    c(0x1CF0E, None, "ZNAMENNY COMBINING MARK TSATA ON RIGHT", 0x20, "Znamenny_Music"),
    c(0x1CF0F, None, "ZNAMENNY COMBINING MARK GORAZDO NIZKO ON RIGHT", 0x20, "Znamenny_Music"),
    c(0x1CF10, None, "ZNAMENNY COMBINING MARK NIZKO ON RIGHT", 0x20, "Znamenny_Music"),
    c(0x1CF11, None, "ZNAMENNY COMBINING MARK SREDNE ON RIGHT", 0x20, "Znamenny_Music"),
    c(0x1CF12, None, "ZNAMENNY COMBINING MARK MALO POVYSHE ON RIGHT", 0x20, "Znamenny_Music"),
    c(0x1CF13, None, "ZNAMENNY COMBINING MARK POVYSHE ON RIGHT", 0x20, "Znamenny_Music"),
    c(0x1CF14, None, "ZNAMENNY COMBINING MARK VYSOKO ON RIGHT", 0x20, "Znamenny_Music"),
    c(0x1CF15, None, "ZNAMENNY COMBINING MARK MALO POVYSHE S KHOKHLOM ON RIGHT", 0x20, "Znamenny_Music"),
    c(0x1CF16, None, "ZNAMENNY COMBINING MARK POVYSHE S KHOKHLOM ON RIGHT", 0x20, "Znamenny_Music"),
    c(0x1CF17, None, "ZNAMENNY COMBINING MARK VYSOKO S KHOKHLOM ON RIGHT", 0x20, "Znamenny_Music"),
    c(0x1CF18, None, "ZNAMENNY COMBINING MARK TSATA S KRYZHEM", 0x20, "Znamenny_Music"),
    c(0x1CF19, None, "ZNAMENNY COMBINING MARK MALO POVYSHE S KRYZHEM", 0x20, "Znamenny_Music"),
    c(0x1CF1A, None, "ZNAMENNY COMBINING MARK STRANNO MALO POVYSHE", 0x20, "Znamenny_Music"),
    c(0x1CF1B, None, "ZNAMENNY COMBINING MARK POVYSHE S KRYZHEM", 0x20, "Znamenny_Music"),
    c(0x1CF1C, None, "ZNAMENNY COMBINING MARK POVYSHE STRANNO", 0x20, "Znamenny_Music"),
    c(0x1CF1D, None, "ZNAMENNY COMBINING MARK VYSOKO S KRYZHEM", 0x20, "Znamenny_Music"),
    c(0x1CF1E, None, "ZNAMENNY COMBINING MARK MALO POVYSHE STRANNO", 0x20, "Znamenny_Music"),
    c(0x1CF1F, None, "ZNAMENNY COMBINING MARK GORAZDO VYSOKO", 0x20, "Znamenny_Music"),
    c(0x1CF20, None, "ZNAMENNY COMBINING MARK ZELO", 0x20, "Znamenny_Music"),
    c(0x1CF21, None, "ZNAMENNY COMBINING MARK ON", 0x20, "Znamenny_Music"),
    c(0x1CF22, None, "ZNAMENNY COMBINING MARK RAVNO", 0x20, "Znamenny_Music"),
    c(0x1CF23, None, "ZNAMENNY COMBINING MARK TIKHAYA", 0x20, "Znamenny_Music"),
    c(0x1CF24, None, "ZNAMENNY COMBINING MARK BORZAYA", 0x20, "Znamenny_Music"),
    c(0x1CF25, None, "ZNAMENNY COMBINING MARK UDARKA", 0x20, "Znamenny_Music"),
    c(0x1CF26, None, "ZNAMENNY COMBINING MARK PODVERTKA", 0x20, "Znamenny_Music"),
    c(0x1CF27, None, "ZNAMENNY COMBINING MARK LOMKA", 0x20, "Znamenny_Music"),
    c(0x1CF28, None, "ZNAMENNY COMBINING MARK KUPNAYA", 0x20, "Znamenny_Music"),
    c(0x1CF29, None, "ZNAMENNY COMBINING MARK KACHKA", 0x20, "Znamenny_Music"),
    c(0x1CF2A, None, "ZNAMENNY COMBINING MARK ZEVOK", 0x20, "Znamenny_Music"),
    c(0x1CF2B, None, "ZNAMENNY COMBINING MARK SKOBA", 0x20, "Znamenny_Music"),
    c(0x1CF2C, None, "ZNAMENNY COMBINING MARK RAZSEKA", 0x20, "Znamenny_Music"),
    c(0x1CF2D, None, "ZNAMENNY COMBINING MARK KRYZH ON LEFT", 0x20, "Znamenny_Music"),
    c(0x1CF30, None, "ZNAMENNY COMBINING TONAL RANGE MARK MRACHNO", 0x20, "Znamenny_Music"),
    c(0x1CF31, None, "ZNAMENNY COMBINING TONAL RANGE MARK SVETLO", 0x20, "Znamenny_Music"),
    c(0x1CF32, None, "ZNAMENNY COMBINING TONAL RANGE MARK TRESVETLO", 0x20, "Znamenny_Music"),
    c(0x1CF33, None, "ZNAMENNY COMBINING MARK ZADERZHKA", 0x20, "Znamenny_Music"),
    c(0x1CF34, None, "ZNAMENNY COMBINING MARK DEMESTVENNY ZADERZHKA", 0x20, "Znamenny_Music"),
    c(0x1CF35, None, "ZNAMENNY COMBINING MARK OTSECHKA", 0x20, "Znamenny_Music"),
    c(0x1CF36, None, "ZNAMENNY COMBINING MARK PODCHASHIE", 0x20, "Znamenny_Music"),
    c(0x1CF37, None, "ZNAMENNY COMBINING MARK PODCHASHIE WITH VERTICAL STROKE", 0x20, "Znamenny_Music"),
    c(0x1CF38, None, "ZNAMENNY COMBINING MARK CHASHKA", 0x20, "Znamenny_Music"),
    c(0x1CF39, None, "ZNAMENNY COMBINING MARK CHASHKA POLNAYA", 0x20, "Znamenny_Music"),
    c(0x1CF3A, None, "ZNAMENNY COMBINING MARK OBLACHKO", 0x20, "Znamenny_Music"),
    c(0x1CF3B, None, "ZNAMENNY COMBINING MARK SOROCHYA NOZHKA", 0x20, "Znamenny_Music"),
    c(0x1CF3C, None, "ZNAMENNY COMBINING MARK TOCHKA", 0x20, "Znamenny_Music"),
    c(0x1CF3D, None, "ZNAMENNY COMBINING MARK DVOETOCHIE", 0x20, "Znamenny_Music"),
    c(0x1CF3E, None, "ZNAMENNY COMBINING ATTACHING VERTICAL OMET", 0x20, "Znamenny_Music"),
    c(0x1CF3F, None, "ZNAMENNY COMBINING MARK CURVED OMET", 0x20, "Znamenny_Music"),
    c(0x1CF40, None, "ZNAMENNY COMBINING MARK KRYZH", 0x20, "Znamenny_Music"),
    c(0x1CF41, None, "ZNAMENNY COMBINING LOWER TONAL RANGE INDICATOR", 0x20, "Znamenny_Music"),
    c(0x1CF42, None, "ZNAMENNY PRIZNAK MODIFIER LEVEL-2", 0x20, "Znamenny_Music"),
    c(0x1CF43, None, "ZNAMENNY PRIZNAK MODIFIER LEVEL-3", 0x20, "Znamenny_Music"),
    c(0x1CF44, None, "ZNAMENNY PRIZNAK MODIFIER DIRECTION FLIP", 0x20, "Znamenny_Music"),
    c(0x1CF45, None, "ZNAMENNY PRIZNAK MODIFIER KRYZH", 0x20, "Znamenny_Music"),
    c(0x1CF46, None, "ZNAMENNY PRIZNAK MODIFIER ROG", 0x20, "Znamenny_Music"),
    c(0x1CF50, None, "ZNAMENNY NEUME KRYUK", 0x00, "Znamenny_Music"),
    c(0x1CF51, None, "ZNAMENNY NEUME KRYUK TIKHY", 0x00, "Znamenny_Music"),
    c(0x1CF52, None, "ZNAMENNY NEUME PARAKLIT", 0x00, "Znamenny_Music"),
    c(0x1CF53, None, "ZNAMENNY NEUME DVA V CHELNU", 0x00, "Znamenny_Music"),
    c(0x1CF54, None, "ZNAMENNY NEUME KLYUCH", 0x00, "Znamenny_Music"),
    c(0x1CF55, None, "ZNAMENNY NEUME ZANOZHEK", 0x00, "Znamenny_Music"),
    c(0x1CF56, None, "ZNAMENNY NEUME STOPITSA", 0x00, "Znamenny_Music"),
    c(0x1CF57, None, "ZNAMENNY NEUME STOPITSA S OCHKOM", 0x00, "Znamenny_Music"),
    c(0x1CF58, None, "ZNAMENNY NEUME PEREVODKA", 0x00, "Znamenny_Music"),
    c(0x1CF59, None, "ZNAMENNY NEUME PEREVODKA NEPOSTOYANNAYA", 0x00, "Znamenny_Music"),
    c(0x1CF5A, None, "ZNAMENNY NEUME STOPITSA WITH SOROCHYA NOZHKA", 0x00, "Znamenny_Music"),
    c(0x1CF5B, None, "ZNAMENNY NEUME CHELYUSTKA", 0x00, "Znamenny_Music"),
    c(0x1CF5C, None, "ZNAMENNY NEUME PALKA", 0x00, "Znamenny_Music"),
    c(0x1CF5D, None, "ZNAMENNY NEUME ZAPYATAYA", 0x00, "Znamenny_Music"),
    c(0x1CF5E, None, "ZNAMENNY NEUME GOLUBCHIK BORZY", 0x00, "Znamenny_Music"),
    c(0x1CF5F, None, "ZNAMENNY NEUME GOLUBCHIK TIKHY", 0x00, "Znamenny_Music"),
    c(0x1CF60, None, "ZNAMENNY NEUME GOLUBCHIK MRACHNY", 0x00, "Znamenny_Music"),
    c(0x1CF61, None, "ZNAMENNY NEUME GOLUBCHIK SVETLY", 0x00, "Znamenny_Music"),
    c(0x1CF62, None, "ZNAMENNY NEUME GOLUBCHIK TRESVETLY", 0x00, "Znamenny_Music"),
    c(0x1CF63, None, "ZNAMENNY NEUME VRAKHIYA PROSTAYA", 0x00, "Znamenny_Music"),
    c(0x1CF64, None, "ZNAMENNY NEUME VRAKHIYA MRACHNAYA", 0x00, "Znamenny_Music"),
    c(0x1CF65, None, "ZNAMENNY NEUME VRAKHIYA SVETLAYA", 0x00, "Znamenny_Music"),
    c(0x1CF66, None, "ZNAMENNY NEUME VRAKHIYA TRESVETLAYA", 0x00, "Znamenny_Music"),
    c(0x1CF67, None, "ZNAMENNY NEUME VRAKHIYA KLYUCHEVAYA PROSTAYA", 0x00, "Znamenny_Music"),
    c(0x1CF68, None, "ZNAMENNY NEUME VRAKHIYA KLYUCHEVAYA MRACHNAYA", 0x00, "Znamenny_Music"),
    c(0x1CF69, None, "ZNAMENNY NEUME VRAKHIYA KLYUCHEVAYA SVETLAYA", 0x00, "Znamenny_Music"),
    c(0x1CF6A, None, "ZNAMENNY NEUME VRAKHIYA KLYUCHEVAYA TRESVETLAYA", 0x00, "Znamenny_Music"),
    c(0x1CF6B, None, "ZNAMENNY NEUME DOUBLE ZAPYATAYA", 0x00, "Znamenny_Music"),
    c(0x1CF6C, None, "ZNAMENNY NEUME REVERSED CHELYUSTKA", 0x00, "Znamenny_Music"),
    c(0x1CF6D, None, "ZNAMENNY NEUME DERBITSA", 0x00, "Znamenny_Music"),
    c(0x1CF6E, None, "ZNAMENNY NEUME KHAMILO", 0x00, "Znamenny_Music"),
    c(0x1CF6F, None, "ZNAMENNY NEUME CHASHKA", 0x00, "Znamenny_Music"),
    c(0x1CF70, None, "ZNAMENNY NEUME PODCHASHIE", 0x00, "Znamenny_Music"),
    c(0x1CF71, None, "ZNAMENNY NEUME SKAMEYTSA MRACHNAYA", 0x00, "Znamenny_Music"),
    c(0x1CF72, None, "ZNAMENNY NEUME SKAMEYTSA SVETLAYA", 0x00, "Znamenny_Music"),
    c(0x1CF73, None, "ZNAMENNY NEUME SKAMEYTSA TRESVETLAYA", 0x00, "Znamenny_Music"),
    c(0x1CF74, None, "ZNAMENNY NEUME SKAMEYTSA TIKHAYA", 0x00, "Znamenny_Music"),
    c(0x1CF75, None, "ZNAMENNY NEUME DEMESTVENNY KLYUCH", 0x00, "Znamenny_Music"),
    c(0x1CF76, None, "ZNAMENNY NEUME SKAMEYTSA KLYUCHEVAYA SVETLAYA", 0x00, "Znamenny_Music"),
    c(0x1CF77, None, "ZNAMENNY NEUME SKAMEYTSA KLYUCHENEPOSTOYANNAYA", 0x00, "Znamenny_Music"),
    c(0x1CF78, None, "ZNAMENNY NEUME SKAMEYTSA KLYUCHEVAYA TIKHAYA", 0x00, "Znamenny_Music"),
    c(0x1CF79, None, "ZNAMENNY NEUME SKAMEYTSA DVOECHELNAYA PROSTAYA", 0x00, "Znamenny_Music"),
    c(0x1CF7A, None, "ZNAMENNY NEUME SKAMEYTSA DVOECHELNAYA SVETLAYA", 0x00, "Znamenny_Music"),
    c(0x1CF7B, None, "ZNAMENNY NEUME SKAMEYTSA DVOECHELNAYA NEPOSTOYANNAYA", 0x00, "Znamenny_Music"),
    c(0x1CF7C, None, "ZNAMENNY NEUME SKAMEYTSA DVOECHELNAYA KLYUCHEVAYA", 0x00, "Znamenny_Music"),
    c(0x1CF7D, None, "ZNAMENNY NEUME SLOZHITIE", 0x00, "Znamenny_Music"),
    c(0x1CF7E, None, "ZNAMENNY NEUME SLOZHITIE S ZAPYATOY", 0x00, "Znamenny_Music"),
    c(0x1CF7F, None, "ZNAMENNY NEUME SLOZHITIE ZAKRYTOE", 0x00, "Znamenny_Music"),
    c(0x1CF80, None, "ZNAMENNY NEUME SLOZHITIE S KRYZHEM", 0x00, "Znamenny_Music"),
    c(0x1CF81, None, "ZNAMENNY NEUME KRYZH", 0x00, "Znamenny_Music"),
    c(0x1CF82, None, "ZNAMENNY NEUME ROG", 0x00, "Znamenny_Music"),
    c(0x1CF83, None, "ZNAMENNY NEUME FITA", 0x00, "Znamenny_Music"),
    c(0x1CF84, None, "ZNAMENNY NEUME KOBYLA", 0x00, "Znamenny_Music"),
    c(0x1CF85, None, "ZNAMENNY NEUME ZMEYTSA", 0x00, "Znamenny_Music"),
    c(0x1CF86, None, "ZNAMENNY NEUME STATYA", 0x00, "Znamenny_Music"),
    c(0x1CF87, None, "ZNAMENNY NEUME STATYA S ZAPYATOY", 0x00, "Znamenny_Music"),
    c(0x1CF88, None, "ZNAMENNY NEUME STATYA S KRYZHEM", 0x00, "Znamenny_Music"),
    c(0x1CF89, None, "ZNAMENNY NEUME STATYA S ZAPYATOY I KRYZHEM", 0x00, "Znamenny_Music"),
    c(0x1CF8A, None, "ZNAMENNY NEUME STATYA S KRYZHEM I ZAPYATOY", 0x00, "Znamenny_Music"),
    c(0x1CF8B, None, "ZNAMENNY NEUME STATYA ZAKRYTAYA", 0x00, "Znamenny_Music"),
    c(0x1CF8C, None, "ZNAMENNY NEUME STATYA ZAKRYTAYA S ZAPYATOY", 0x00, "Znamenny_Music"),
    c(0x1CF8D, None, "ZNAMENNY NEUME STATYA S ROGOM", 0x00, "Znamenny_Music"),
    c(0x1CF8E, None, "ZNAMENNY NEUME STATYA S DVUMYA ZAPYATYMI", 0x00, "Znamenny_Music"),
    c(0x1CF8F, None, "ZNAMENNY NEUME STATYA S ZAPYATOY I PODCHASHIEM", 0x00, "Znamenny_Music"),
    c(0x1CF90, None, "ZNAMENNY NEUME POLKULIZMY", 0x00, "Znamenny_Music"),
    c(0x1CF91, None, "ZNAMENNY NEUME STATYA NEPOSTOYANNAYA", 0x00, "Znamenny_Music"),
    c(0x1CF92, None, "ZNAMENNY NEUME STRELA PROSTAYA", 0x00, "Znamenny_Music"),
    c(0x1CF93, None, "ZNAMENNY NEUME STRELA MRACHNOTIKHAYA", 0x00, "Znamenny_Music"),
    c(0x1CF94, None, "ZNAMENNY NEUME STRELA KRYZHEVAYA", 0x00, "Znamenny_Music"),
    c(0x1CF95, None, "ZNAMENNY NEUME STRELA POLUPOVODNAYA", 0x00, "Znamenny_Music"),
    c(0x1CF96, None, "ZNAMENNY NEUME STRELA POVODNAYA", 0x00, "Znamenny_Music"),
    c(0x1CF97, None, "ZNAMENNY NEUME STRELA NEPOSTOYANNAYA", 0x00, "Znamenny_Music"),
    c(0x1CF98, None, "ZNAMENNY NEUME STRELA KLYUCHEPOVODNAYA", 0x00, "Znamenny_Music"),
    c(0x1CF99, None, "ZNAMENNY NEUME STRELA KLYUCHENEPOSTOYANNAYA", 0x00, "Znamenny_Music"),
    c(0x1CF9A, None, "ZNAMENNY NEUME STRELA TIKHAYA PUTNAYA", 0x00, "Znamenny_Music"),
    c(0x1CF9B, None, "ZNAMENNY NEUME STRELA DVOECHELNAYA", 0x00, "Znamenny_Music"),
    c(0x1CF9C, None, "ZNAMENNY NEUME STRELA DVOECHELNOKRYZHEVAYA", 0x00, "Znamenny_Music"),
    c(0x1CF9D, None, "ZNAMENNY NEUME STRELA DVOECHELNOPOVODNAYA", 0x00, "Znamenny_Music"),
    c(0x1CF9E, None, "ZNAMENNY NEUME STRELA DVOECHELNAYA KLYUCHEVAYA", 0x00, "Znamenny_Music"),
    c(0x1CF9F, None, "ZNAMENNY NEUME STRELA DVOECHELNOPOVODNAYA KLYUCHEVAYA", 0x00, "Znamenny_Music"),
    c(0x1CFA0, None, "ZNAMENNY NEUME STRELA GROMNAYA WITH SINGLE ZAPYATAYA", 0x00, "Znamenny_Music"),
    c(0x1CFA1, None, "ZNAMENNY NEUME STRELA GROMOPOVODNAYA WITH SINGLE ZAPYATAYA", 0x00, "Znamenny_Music"),
    c(0x1CFA2, None, "ZNAMENNY NEUME STRELA GROMNAYA", 0x00, "Znamenny_Music"),
    c(0x1CFA3, None, "ZNAMENNY NEUME STRELA GROMOPOVODNAYA", 0x00, "Znamenny_Music"),
    c(0x1CFA4, None, "ZNAMENNY NEUME STRELA GROMOPOVODNAYA WITH DOUBLE ZAPYATAYA", 0x00, "Znamenny_Music"),
    c(0x1CFA5, None, "ZNAMENNY NEUME STRELA GROMOKRYZHEVAYA", 0x00, "Znamenny_Music"),
    c(0x1CFA6, None, "ZNAMENNY NEUME STRELA GROMOKRYZHEVAYA POVODNAYA", 0x00, "Znamenny_Music"),
    c(0x1CFA7, None, "ZNAMENNY NEUME MECHIK", 0x00, "Znamenny_Music"),
    c(0x1CFA8, None, "ZNAMENNY NEUME MECHIK POVODNY", 0x00, "Znamenny_Music"),
    c(0x1CFA9, None, "ZNAMENNY NEUME MECHIK KLYUCHEVOY", 0x00, "Znamenny_Music"),
    c(0x1CFAA, None, "ZNAMENNY NEUME MECHIK KLYUCHEPOVODNY", 0x00, "Znamenny_Music"),
    c(0x1CFAB, None, "ZNAMENNY NEUME MECHIK KLYUCHENEPOSTOYANNY", 0x00, "Znamenny_Music"),
    c(0x1CFAC, None, "ZNAMENNY NEUME STRELA TRYASOGLASNAYA", 0x00, "Znamenny_Music"),
    c(0x1CFAD, None, "ZNAMENNY NEUME STRELA TRYASOPOVODNAYA", 0x00, "Znamenny_Music"),
    c(0x1CFAE, None, "ZNAMENNY NEUME STRELA TRYASOSTRELNAYA", 0x00, "Znamenny_Music"),
    c(0x1CFAF, None, "ZNAMENNY NEUME OSOKA", 0x00, "Znamenny_Music"),
    c(0x1CFB0, None, "ZNAMENNY NEUME OSOKA SVETLAYA", 0x00, "Znamenny_Music"),
    c(0x1CFB1, None, "ZNAMENNY NEUME OSOKA TRESVETLAYA", 0x00, "Znamenny_Music"),
    c(0x1CFB2, None, "ZNAMENNY NEUME OSOKA KRYUKOVAYA SVETLAYA", 0x00, "Znamenny_Music"),
    c(0x1CFB3, None, "ZNAMENNY NEUME OSOKA KLYUCHEVAYA SVETLAYA", 0x00, "Znamenny_Music"),
    c(0x1CFB4, None, "ZNAMENNY NEUME OSOKA KLYUCHEVAYA NEPOSTOYANNAYA", 0x00, "Znamenny_Music"),
    c(0x1CFB5, None, "ZNAMENNY NEUME STRELA KRYUKOVAYA", 0x00, "Znamenny_Music"),
    c(0x1CFB6, None, "ZNAMENNY NEUME STRELA KRYUKOVAYA POVODNAYA", 0x00, "Znamenny_Music"),
    c(0x1CFB7, None, "ZNAMENNY NEUME STRELA KRYUKOVAYA GROMNAYA WITH SINGLE ZAPYATAYA", 0x00, "Znamenny_Music"),
    c(0x1CFB8, None, "ZNAMENNY NEUME STRELA KRYUKOVAYA GROMOPOVODNAYA WITH SINGLE ZAPYATAYA", 0x00, "Znamenny_Music"),
    c(0x1CFB9, None, "ZNAMENNY NEUME STRELA KRYUKOVAYA GROMNAYA", 0x00, "Znamenny_Music"),
    c(0x1CFBA, None, "ZNAMENNY NEUME STRELA KRYUKOVAYA GROMOPOVODNAYA", 0x00, "Znamenny_Music"),
    c(0x1CFBB, None, "ZNAMENNY NEUME STRELA KRYUKOVAYA GROMOPOVODNAYA WITH DOUBLE ZAPYATAYA", 0x00, "Znamenny_Music"),
    c(0x1CFBC, None, "ZNAMENNY NEUME STRELA KRYUKOVAYA GROMOKRYZHEVAYA", 0x00, "Znamenny_Music"),
    c(0x1CFBD, None, "ZNAMENNY NEUME STRELA KRYUKOVAYA GROMOKRYZHEVAYA POVODNAYA", 0x00, "Znamenny_Music"),
    c(0x1CFBE, None, "ZNAMENNY NEUME STRELA KRYUKOVAYA TRYASKA", 0x00, "Znamenny_Music"),
    c(0x1CFBF, None, "ZNAMENNY NEUME KUFISMA", 0x00, "Znamenny_Music"),
    c(0x1CFC0, None, "ZNAMENNY NEUME OBLAKO", 0x00, "Znamenny_Music"),
    c(0x1CFC1, None, "ZNAMENNY NEUME DUDA", 0x00, "Znamenny_Music"),
    c(0x1CFC2, None, "ZNAMENNY NEUME NEMKA", 0x00, "Znamenny_Music"),
    c(0x1CFC3, None, "ZNAMENNY NEUME PAUK", 0x00, "Znamenny_Music"),
    c(0x1D000, None, "BYZANTINE MUSICAL SYMBOL PSILI", 0x00, "Byzantine_Music"),
    c(0x1D001, None, "BYZANTINE MUSICAL SYMBOL DASEIA", 0x00, "Byzantine_Music"),
    c(0x1D002, None, "BYZANTINE MUSICAL SYMBOL PERISPOMENI", 0x00, "Byzantine_Music"),
    c(0x1D003, None, "BYZANTINE MUSICAL SYMBOL OXEIA EKFONITIKON", 0x00, "Byzantine_Music"),
    c(0x1D004, None, "BYZANTINE MUSICAL SYMBOL OXEIA DIPLI", 0x00, "Byzantine_Music"),
    c(0x1D005, None, "BYZANTINE MUSICAL SYMBOL VAREIA EKFONITIKON", 0x00, "Byzantine_Music"),
    c(0x1D006, None, "BYZANTINE MUSICAL SYMBOL VAREIA DIPLI", 0x00, "Byzantine_Music"),
    c(0x1D007, None, "BYZANTINE MUSICAL SYMBOL KATHISTI", 0x00, "Byzantine_Music"),
    c(0x1D008, None, "BYZANTINE MUSICAL SYMBOL SYRMATIKI", 0x00, "Byzantine_Music"),
    c(0x1D009, None, "BYZANTINE MUSICAL SYMBOL PARAKLITIKI", 0x00, "Byzantine_Music"),
    c(0x1D00A, None, "BYZANTINE MUSICAL SYMBOL YPOKRISIS", 0x00, "Byzantine_Music"),
    c(0x1D00B, None, "BYZANTINE MUSICAL SYMBOL YPOKRISIS DIPLI", 0x00, "Byzantine_Music"),
    c(0x1D00C, None, "BYZANTINE MUSICAL SYMBOL KREMASTI", 0x00, "Byzantine_Music"),
    c(0x1D00D, None, "BYZANTINE MUSICAL SYMBOL APESO EKFONITIKON", 0x00, "Byzantine_Music"),
    c(0x1D00E, None, "BYZANTINE MUSICAL SYMBOL EXO EKFONITIKON", 0x00, "Byzantine_Music"),
    c(0x1D00F, None, "BYZANTINE MUSICAL SYMBOL TELEIA", 0x00, "Byzantine_Music"),
    c(0x1D010, None, "BYZANTINE MUSICAL SYMBOL KENTIMATA", 0x00, "Byzantine_Music"),
    c(0x1D011, None, "BYZANTINE MUSICAL SYMBOL APOSTROFOS", 0x00, "Byzantine_Music"),
    c(0x1D012, None, "BYZANTINE MUSICAL SYMBOL APOSTROFOS DIPLI", 0x00, "Byzantine_Music"),
    c(0x1D013, None, "BYZANTINE MUSICAL SYMBOL SYNEVMA", 0x00, "Byzantine_Music"),
    c(0x1D014, None, "BYZANTINE MUSICAL SYMBOL THITA", 0x00, "Byzantine_Music"),
    c(0x1D015, None, "BYZANTINE MUSICAL SYMBOL OLIGON ARCHAION", 0x00, "Byzantine_Music"),
    c(0x1D016, None, "BYZANTINE MUSICAL SYMBOL GORGON ARCHAION", 0x00, "Byzantine_Music"),
    c(0x1D017, None, "BYZANTINE MUSICAL SYMBOL PSILON", 0x00, "Byzantine_Music"),
    c(0x1D018, None, "BYZANTINE MUSICAL SYMBOL CHAMILON", 0x00, "Byzantine_Music"),
    c(0x1D019, None, "BYZANTINE MUSICAL SYMBOL VATHY", 0x00, "Byzantine_Music"),
    c(0x1D01A, None, "BYZANTINE MUSICAL SYMBOL ISON ARCHAION", 0x00, "Byzantine_Music"),
    c(0x1D01B, None, "BYZANTINE MUSICAL SYMBOL KENTIMA ARCHAION", 0x00, "Byzantine_Music"),
    c(0x1D01C, None, "BYZANTINE MUSICAL SYMBOL KENTIMATA ARCHAION", 0x00, "Byzantine_Music"),
    c(0x1D01D, None, "BYZANTINE MUSICAL SYMBOL SAXIMATA", 0x00, "Byzantine_Music"),
    c(0x1D01E, None, "BYZANTINE MUSICAL SYMBOL PARICHON", 0x00, "Byzantine_Music"),
    c(0x1D01F, None, "BYZANTINE MUSICAL SYMBOL STAVROS APODEXIA", 0x00, "Byzantine_Music"),
    c(0x1D020, None, "BYZANTINE MUSICAL SYMBOL OXEIAI ARCHAION", 0x00, "Byzantine_Music"),
    c(0x1D021, None, "BYZANTINE MUSICAL SYMBOL VAREIAI ARCHAION", 0x00, "Byzantine_Music"),
    c(0x1D022, None, "BYZANTINE MUSICAL SYMBOL APODERMA ARCHAION", 0x00, "Byzantine_Music"),
    c(0x1D023, None, "BYZANTINE MUSICAL SYMBOL APOTHEMA", 0x00, "Byzantine_Music"),
    c(0x1D024, None, "BYZANTINE MUSICAL SYMBOL KLASMA", 0x00, "Byzantine_Music"),
    c(0x1D025, None, "BYZANTINE MUSICAL SYMBOL REVMA", 0x00, "Byzantine_Music"),
    c(0x1D026, None, "BYZANTINE MUSICAL SYMBOL PIASMA ARCHAION", 0x00, "Byzantine_Music"),
    c(0x1D027, None, "BYZANTINE MUSICAL SYMBOL TINAGMA", 0x00, "Byzantine_Music"),
    c(0x1D028, None, "BYZANTINE MUSICAL SYMBOL ANATRICHISMA", 0x00, "Byzantine_Music"),
    c(0x1D029, None, "BYZANTINE MUSICAL SYMBOL SEISMA", 0x00, "Byzantine_Music"),
    c(0x1D02A, None, "BYZANTINE MUSICAL SYMBOL SYNAGMA ARCHAION", 0x00, "Byzantine_Music"),
    c(0x1D02B, None, "BYZANTINE MUSICAL SYMBOL SYNAGMA META STAVROU", 0x00, "Byzantine_Music"),
    c(0x1D02C, None, "BYZANTINE MUSICAL SYMBOL OYRANISMA ARCHAION", 0x00, "Byzantine_Music"),
    c(0x1D02D, None, "BYZANTINE MUSICAL SYMBOL THEMA", 0x00, "Byzantine_Music"),
    c(0x1D02E, None, "BYZANTINE MUSICAL SYMBOL LEMOI", 0x00, "Byzantine_Music"),
    c(0x1D02F, None, "BYZANTINE MUSICAL SYMBOL DYO", 0x00, "Byzantine_Music"),
    c(0x1D030, None, "BYZANTINE MUSICAL SYMBOL TRIA", 0x00, "Byzantine_Music"),
    c(0x1D031, None, "BYZANTINE MUSICAL SYMBOL TESSERA", 0x00, "Byzantine_Music"),
    c(0x1D032, None, "BYZANTINE MUSICAL SYMBOL KRATIMATA", 0x00, "Byzantine_Music"),
    c(0x1D033, None, "BYZANTINE MUSICAL SYMBOL APESO EXO NEO", 0x00, "Byzantine_Music"),
    c(0x1D034, None, "BYZANTINE MUSICAL SYMBOL FTHORA ARCHAION", 0x00, "Byzantine_Music"),
    c(0x1D035, None, "BYZANTINE MUSICAL SYMBOL IMIFTHORA", 0x00, "Byzantine_Music"),
    c(0x1D036, None, "BYZANTINE MUSICAL SYMBOL TROMIKON ARCHAION", 0x00, "Byzantine_Music"),
    c(0x1D037, None, "BYZANTINE MUSICAL SYMBOL KATAVA TROMIKON", 0x00, "Byzantine_Music"),
    c(0x1D038, None, "BYZANTINE MUSICAL SYMBOL PELASTON", 0x00, "Byzantine_Music"),
    c(0x1D039, None, "BYZANTINE MUSICAL SYMBOL PSIFISTON", 0x00, "Byzantine_Music"),
    c(0x1D03A, None, "BYZANTINE MUSICAL SYMBOL KONTEVMA", 0x00, "Byzantine_Music"),
    c(0x1D03B, None, "BYZANTINE MUSICAL SYMBOL CHOREVMA ARCHAION", 0x00, "Byzantine_Music"),
    c(0x1D03C, None, "BYZANTINE MUSICAL SYMBOL RAPISMA", 0x00, "Byzantine_Music"),
    c(0x1D03D, None, "BYZANTINE MUSICAL SYMBOL PARAKALESMA ARCHAION", 0x00, "Byzantine_Music"),
    c(0x1D03E, None, "BYZANTINE MUSICAL SYMBOL PARAKLITIKI ARCHAION", 0x00, "Byzantine_Music"),
    c(0x1D03F, None, "BYZANTINE MUSICAL SYMBOL ICHADIN", 0x00, "Byzantine_Music"),
    c(0x1D040, None, "BYZANTINE MUSICAL SYMBOL NANA", 0x00, "Byzantine_Music"),
    c(0x1D041, None, "BYZANTINE MUSICAL SYMBOL PETASMA", 0x00, "Byzantine_Music"),
    c(0x1D042, None, "BYZANTINE MUSICAL SYMBOL KONTEVMA ALLO", 0x00, "Byzantine_Music"),
    c(0x1D043, None, "BYZANTINE MUSICAL SYMBOL TROMIKON ALLO", 0x00, "Byzantine_Music"),
    c(0x1D044, None, "BYZANTINE MUSICAL SYMBOL STRAGGISMATA", 0x00, "Byzantine_Music"),
    c(0x1D045, None, "BYZANTINE MUSICAL SYMBOL GRONTHISMATA", 0x00, "Byzantine_Music"),
    c(0x1D046, None, "BYZANTINE MUSICAL SYMBOL ISON NEO", 0x00, "Byzantine_Music"),
    c(0x1D047, None, "BYZANTINE MUSICAL SYMBOL OLIGON NEO", 0x00, "Byzantine_Music"),
    c(0x1D048, None, "BYZANTINE MUSICAL SYMBOL OXEIA NEO", 0x00, "Byzantine_Music"),
    c(0x1D049, None, "BYZANTINE MUSICAL SYMBOL PETASTI", 0x00, "Byzantine_Music"),
    c(0x1D04A, None, "BYZANTINE MUSICAL SYMBOL KOUFISMA", 0x00, "Byzantine_Music"),
    c(0x1D04B, None, "BYZANTINE MUSICAL SYMBOL PETASTOKOUFISMA", 0x00, "Byzantine_Music"),
    c(0x1D04C, None, "BYZANTINE MUSICAL SYMBOL KRATIMOKOUFISMA", 0x00, "Byzantine_Music"),
    c(0x1D04D, None, "BYZANTINE MUSICAL SYMBOL PELASTON NEO", 0x00, "Byzantine_Music"),
    c(0x1D04E, None, "BYZANTINE MUSICAL SYMBOL KENTIMATA NEO ANO", 0x00, "Byzantine_Music"),
    c(0x1D04F, None, "BYZANTINE MUSICAL SYMBOL KENTIMA NEO ANO", 0x00, "Byzantine_Music"),
    c(0x1D050, None, "BYZANTINE MUSICAL SYMBOL YPSILI", 0x00, "Byzantine_Music"),
    c(0x1D051, None, "BYZANTINE MUSICAL SYMBOL APOSTROFOS NEO", 0x00, "Byzantine_Music"),
    c(0x1D052, None, "BYZANTINE MUSICAL SYMBOL APOSTROFOI SYNDESMOS NEO", 0x00, "Byzantine_Music"),
    c(0x1D053, None, "BYZANTINE MUSICAL SYMBOL YPORROI", 0x00, "Byzantine_Music"),
    c(0x1D054, None, "BYZANTINE MUSICAL SYMBOL KRATIMOYPORROON", 0x00, "Byzantine_Music"),
    c(0x1D055, None, "BYZANTINE MUSICAL SYMBOL ELAFRON", 0x00, "Byzantine_Music"),
    c(0x1D056, None, "BYZANTINE MUSICAL SYMBOL CHAMILI", 0x00, "Byzantine_Music"),
    c(0x1D057, None, "BYZANTINE MUSICAL SYMBOL MIKRON ISON", 0x00, "Byzantine_Music"),
    c(0x1D058, None, "BYZANTINE MUSICAL SYMBOL VAREIA NEO", 0x00, "Byzantine_Music"),
    c(0x1D059, None, "BYZANTINE MUSICAL SYMBOL PIASMA NEO", 0x00, "Byzantine_Music"),
    c(0x1D05A, None, "BYZANTINE MUSICAL SYMBOL PSIFISTON NEO", 0x00, "Byzantine_Music"),
    c(0x1D05B, None, "BYZANTINE MUSICAL SYMBOL OMALON", 0x00, "Byzantine_Music"),
    c(0x1D05C, None, "BYZANTINE MUSICAL SYMBOL ANTIKENOMA", 0x00, "Byzantine_Music"),
    c(0x1D05D, None, "BYZANTINE MUSICAL SYMBOL LYGISMA", 0x00, "Byzantine_Music"),
    c(0x1D05E, None, "BYZANTINE MUSICAL SYMBOL PARAKLITIKI NEO", 0x00, "Byzantine_Music"),
    c(0x1D05F, None, "BYZANTINE MUSICAL SYMBOL PARAKALESMA NEO", 0x00, "Byzantine_Music"),
    c(0x1D060, None, "BYZANTINE MUSICAL SYMBOL ETERON PARAKALESMA", 0x00, "Byzantine_Music"),
    c(0x1D061, None, "BYZANTINE MUSICAL SYMBOL KYLISMA", 0x00, "Byzantine_Music"),
    c(0x1D062, None, "BYZANTINE MUSICAL SYMBOL ANTIKENOKYLISMA", 0x00, "Byzantine_Music"),
    c(0x1D063, None, "BYZANTINE MUSICAL SYMBOL TROMIKON NEO", 0x00, "Byzantine_Music"),
    c(0x1D064, None, "BYZANTINE MUSICAL SYMBOL EKSTREPTON", 0x00, "Byzantine_Music"),
    c(0x1D065, None, "BYZANTINE MUSICAL SYMBOL SYNAGMA NEO", 0x00, "Byzantine_Music"),
    c(0x1D066, None, "BYZANTINE MUSICAL SYMBOL SYRMA", 0x00, "Byzantine_Music"),
    c(0x1D067, None, "BYZANTINE MUSICAL SYMBOL CHOREVMA NEO", 0x00, "Byzantine_Music"),
    c(0x1D068, None, "BYZANTINE MUSICAL SYMBOL EPEGERMA", 0x00, "Byzantine_Music"),
    c(0x1D069, None, "BYZANTINE MUSICAL SYMBOL SEISMA NEO", 0x00, "Byzantine_Music"),
    c(0x1D06A, None, "BYZANTINE MUSICAL SYMBOL XIRON KLASMA", 0x00, "Byzantine_Music"),
    c(0x1D06B, None, "BYZANTINE MUSICAL SYMBOL TROMIKOPSIFISTON", 0x00, "Byzantine_Music"),
    c(0x1D06C, None, "BYZANTINE MUSICAL SYMBOL PSIFISTOLYGISMA", 0x00, "Byzantine_Music"),
    c(0x1D06D, None, "BYZANTINE MUSICAL SYMBOL TROMIKOLYGISMA", 0x00, "Byzantine_Music"),
    c(0x1D06E, None, "BYZANTINE MUSICAL SYMBOL TROMIKOPARAKALESMA", 0x00, "Byzantine_Music"),
    c(0x1D06F, None, "BYZANTINE MUSICAL SYMBOL PSIFISTOPARAKALESMA", 0x00, "Byzantine_Music"),
    c(0x1D070, None, "BYZANTINE MUSICAL SYMBOL TROMIKOSYNAGMA", 0x00, "Byzantine_Music"),
    c(0x1D071, None, "BYZANTINE MUSICAL SYMBOL PSIFISTOSYNAGMA", 0x00, "Byzantine_Music"),
    c(0x1D072, None, "BYZANTINE MUSICAL SYMBOL GORGOSYNTHETON", 0x00, "Byzantine_Music"),
    c(0x1D073, None, "BYZANTINE MUSICAL SYMBOL ARGOSYNTHETON", 0x00, "Byzantine_Music"),
    c(0x1D074, None, "BYZANTINE MUSICAL SYMBOL ETERON ARGOSYNTHETON", 0x00, "Byzantine_Music"),
    c(0x1D075, None, "BYZANTINE MUSICAL SYMBOL OYRANISMA NEO", 0x00, "Byzantine_Music"),
    c(0x1D076, None, "BYZANTINE MUSICAL SYMBOL THEMATISMOS ESO", 0x00, "Byzantine_Music"),
    c(0x1D077, None, "BYZANTINE MUSICAL SYMBOL THEMATISMOS EXO", 0x00, "Byzantine_Music"),
    c(0x1D078, None, "BYZANTINE MUSICAL SYMBOL THEMA APLOUN", 0x00, "Byzantine_Music"),
    c(0x1D079, None, "BYZANTINE MUSICAL SYMBOL THES KAI APOTHES", 0x00, "Byzantine_Music"),
    c(0x1D07A, None, "BYZANTINE MUSICAL SYMBOL KATAVASMA", 0x00, "Byzantine_Music"),
    c(0x1D07B, None, "BYZANTINE MUSICAL SYMBOL ENDOFONON", 0x00, "Byzantine_Music"),
    c(0x1D07C, None, "BYZANTINE MUSICAL SYMBOL YFEN KATO", 0x00, "Byzantine_Music"),
    c(0x1D07D, None, "BYZANTINE MUSICAL SYMBOL YFEN ANO", 0x00, "Byzantine_Music"),
    c(0x1D07E, None, "BYZANTINE MUSICAL SYMBOL STAVROS", 0x00, "Byzantine_Music"),
    c(0x1D07F, None, "BYZANTINE MUSICAL SYMBOL KLASMA ANO", 0x00, "Byzantine_Music"),
    c(0x1D080, None, "BYZANTINE MUSICAL SYMBOL DIPLI ARCHAION", 0x00, "Byzantine_Music"),
    c(0x1D081, None, "BYZANTINE MUSICAL SYMBOL KRATIMA ARCHAION", 0x00, "Byzantine_Music"),
    c(0x1D082, None, "BYZANTINE MUSICAL SYMBOL KRATIMA ALLO", 0x00, "Byzantine_Music"),
    c(0x1D083, None, "BYZANTINE MUSICAL SYMBOL KRATIMA NEO", 0x00, "Byzantine_Music"),
    c(0x1D084, None, "BYZANTINE MUSICAL SYMBOL APODERMA NEO", 0x00, "Byzantine_Music"),
    c(0x1D085, None, "BYZANTINE MUSICAL SYMBOL APLI", 0x00, "Byzantine_Music"),
    c(0x1D086, None, "BYZANTINE MUSICAL SYMBOL DIPLI", 0x00, "Byzantine_Music"),
    c(0x1D087, None, "BYZANTINE MUSICAL SYMBOL TRIPLI", 0x00, "Byzantine_Music"),
    c(0x1D088, None, "BYZANTINE MUSICAL SYMBOL TETRAPLI", 0x00, "Byzantine_Music"),
    c(0x1D089, None, "BYZANTINE MUSICAL SYMBOL KORONIS", 0x00, "Byzantine_Music"),
    c(0x1D08A, None, "BYZANTINE MUSICAL SYMBOL LEIMMA ENOS CHRONOU", 0x00, "Byzantine_Music"),
    c(0x1D08B, None, "BYZANTINE MUSICAL SYMBOL LEIMMA DYO CHRONON", 0x00, "Byzantine_Music"),
    c(0x1D08C, None, "BYZANTINE MUSICAL SYMBOL LEIMMA TRION CHRONON", 0x00, "Byzantine_Music"),
    c(0x1D08D, None, "BYZANTINE MUSICAL SYMBOL LEIMMA TESSARON CHRONON", 0x00, "Byzantine_Music"),
    c(0x1D08E, None, "BYZANTINE MUSICAL SYMBOL LEIMMA IMISEOS CHRONOU", 0x00, "Byzantine_Music"),
    c(0x1D08F, None, "BYZANTINE MUSICAL SYMBOL GORGON NEO ANO", 0x00, "Byzantine_Music"),
    c(0x1D090, None, "BYZANTINE MUSICAL SYMBOL GORGON PARESTIGMENON ARISTERA", 0x00, "Byzantine_Music"),
    c(0x1D091, None, "BYZANTINE MUSICAL SYMBOL GORGON PARESTIGMENON DEXIA", 0x00, "Byzantine_Music"),
    c(0x1D092, None, "BYZANTINE MUSICAL SYMBOL DIGORGON", 0x00, "Byzantine_Music"),
    c(0x1D093, None, "BYZANTINE MUSICAL SYMBOL DIGORGON PARESTIGMENON ARISTERA KATO", 0x00, "Byzantine_Music"),
    c(0x1D094, None, "BYZANTINE MUSICAL SYMBOL DIGORGON PARESTIGMENON ARISTERA ANO", 0x00, "Byzantine_Music"),
    c(0x1D095, None, "BYZANTINE MUSICAL SYMBOL DIGORGON PARESTIGMENON DEXIA", 0x00, "Byzantine_Music"),
    c(0x1D096, None, "BYZANTINE MUSICAL SYMBOL TRIGORGON", 0x00, "Byzantine_Music"),
    c(0x1D097, None, "BYZANTINE MUSICAL SYMBOL ARGON", 0x00, "Byzantine_Music"),
    c(0x1D098, None, "BYZANTINE MUSICAL SYMBOL IMIDIARGON", 0x00, "Byzantine_Music"),
    c(0x1D099, None, "BYZANTINE MUSICAL SYMBOL DIARGON", 0x00, "Byzantine_Music"),
    c(0x1D09A, None, "BYZANTINE MUSICAL SYMBOL AGOGI POLI ARGI", 0x00, "Byzantine_Music"),
    c(0x1D09B, None, "BYZANTINE MUSICAL SYMBOL AGOGI ARGOTERI", 0x00, "Byzantine_Music"),
    c(0x1D09C, None, "BYZANTINE MUSICAL SYMBOL AGOGI ARGI", 0x00, "Byzantine_Music"),
    c(0x1D09D, None, "BYZANTINE MUSICAL SYMBOL AGOGI METRIA", 0x00, "Byzantine_Music"),
    c(0x1D09E, None, "BYZANTINE MUSICAL SYMBOL AGOGI MESI", 0x00, "Byzantine_Music"),
    c(0x1D09F, None, "BYZANTINE MUSICAL SYMBOL AGOGI GORGI", 0x00, "Byzantine_Music"),
    c(0x1D0A0, None, "BYZANTINE MUSICAL SYMBOL AGOGI GORGOTERI", 0x00, "Byzantine_Music"),
    c(0x1D0A1, None, "BYZANTINE MUSICAL SYMBOL AGOGI POLI GORGI", 0x00, "Byzantine_Music"),
    c(0x1D0A2, None, "BYZANTINE MUSICAL SYMBOL MARTYRIA PROTOS ICHOS", 0x00, "Byzantine_Music"),
    c(0x1D0A3, None, "BYZANTINE MUSICAL SYMBOL MARTYRIA ALLI PROTOS ICHOS", 0x00, "Byzantine_Music"),
    c(0x1D0A4, None, "BYZANTINE MUSICAL SYMBOL MARTYRIA DEYTEROS ICHOS", 0x00, "Byzantine_Music"),
    c(0x1D0A5, None, "BYZANTINE MUSICAL SYMBOL MARTYRIA ALLI DEYTEROS ICHOS", 0x00, "Byzantine_Music"),
    c(0x1D0A6, None, "BYZANTINE MUSICAL SYMBOL MARTYRIA TRITOS ICHOS", 0x00, "Byzantine_Music"),
    c(0x1D0A7, None, "BYZANTINE MUSICAL SYMBOL MARTYRIA TRIFONIAS", 0x00, "Byzantine_Music"),
    c(0x1D0A8, None, "BYZANTINE MUSICAL SYMBOL MARTYRIA TETARTOS ICHOS", 0x00, "Byzantine_Music"),
    c(0x1D0A9, None, "BYZANTINE MUSICAL SYMBOL MARTYRIA TETARTOS LEGETOS ICHOS", 0x00, "Byzantine_Music"),
    c(0x1D0AA, None, "BYZANTINE MUSICAL SYMBOL MARTYRIA LEGETOS ICHOS", 0x00, "Byzantine_Music"),
    c(0x1D0AB, None, "BYZANTINE MUSICAL SYMBOL MARTYRIA PLAGIOS ICHOS", 0x00, "Byzantine_Music"),
    c(0x1D0AC, None, "BYZANTINE MUSICAL SYMBOL ISAKIA TELOUS ICHIMATOS", 0x00, "Byzantine_Music"),
    c(0x1D0AD, None, "BYZANTINE MUSICAL SYMBOL APOSTROFOI TELOUS ICHIMATOS", 0x00, "Byzantine_Music"),
    c(0x1D0AE, None, "BYZANTINE MUSICAL SYMBOL FANEROSIS TETRAFONIAS", 0x00, "Byzantine_Music"),
    c(0x1D0AF, None, "BYZANTINE MUSICAL SYMBOL FANEROSIS MONOFONIAS", 0x00, "Byzantine_Music"),
    c(0x1D0B0, None, "BYZANTINE MUSICAL SYMBOL FANEROSIS DIFONIAS", 0x00, "Byzantine_Music"),
    c(0x1D0B1, None, "BYZANTINE MUSICAL SYMBOL MARTYRIA VARYS ICHOS", 0x00, "Byzantine_Music"),
    c(0x1D0B2, None, "BYZANTINE MUSICAL SYMBOL MARTYRIA PROTOVARYS ICHOS", 0x00, "Byzantine_Music"),
    c(0x1D0B3, None, "BYZANTINE MUSICAL SYMBOL MARTYRIA PLAGIOS TETARTOS ICHOS", 0x00, "Byzantine_Music"),
    c(0x1D0B4, None, "BYZANTINE MUSICAL SYMBOL GORTHMIKON N APLOUN", 0x00, "Byzantine_Music"),
    c(0x1D0B5, None, "BYZANTINE MUSICAL SYMBOL GORTHMIKON N DIPLOUN", 0x00, "Byzantine_Music"),
    c(0x1D0B6, None, "BYZANTINE MUSICAL SYMBOL ENARXIS KAI FTHORA VOU", 0x00, "Byzantine_Music"),
    c(0x1D0B7, None, "BYZANTINE MUSICAL SYMBOL IMIFONON", 0x00, "Byzantine_Music"),
    c(0x1D0B8, None, "BYZANTINE MUSICAL SYMBOL IMIFTHORON", 0x00, "Byzantine_Music"),
    c(0x1D0B9, None, "BYZANTINE MUSICAL SYMBOL FTHORA ARCHAION DEYTEROU ICHOU", 0x00, "Byzantine_Music"),
    c(0x1D0BA, None, "BYZANTINE MUSICAL SYMBOL FTHORA DIATONIKI PA", 0x00, "Byzantine_Music"),
    c(0x1D0BB, None, "BYZANTINE MUSICAL SYMBOL FTHORA DIATONIKI NANA", 0x00, "Byzantine_Music"),
    c(0x1D0BC, None, "BYZANTINE MUSICAL SYMBOL FTHORA NAOS ICHOS", 0x00, "Byzantine_Music"),
    c(0x1D0BD, None, "BYZANTINE MUSICAL SYMBOL FTHORA DIATONIKI DI", 0x00, "Byzantine_Music"),
    c(0x1D0BE, None, "BYZANTINE MUSICAL SYMBOL FTHORA SKLIRON DIATONON DI", 0x00, "Byzantine_Music"),
    c(0x1D0BF, None, "BYZANTINE MUSICAL SYMBOL FTHORA DIATONIKI KE", 0x00, "Byzantine_Music"),
    c(0x1D0C0, None, "BYZANTINE MUSICAL SYMBOL FTHORA DIATONIKI ZO", 0x00, "Byzantine_Music"),
    c(0x1D0C1, None, "BYZANTINE MUSICAL SYMBOL FTHORA DIATONIKI NI KATO", 0x00, "Byzantine_Music"),
    c(0x1D0C2, None, "BYZANTINE MUSICAL SYMBOL FTHORA DIATONIKI NI ANO", 0x00, "Byzantine_Music"),
    c(0x1D0C3, None, "BYZANTINE MUSICAL SYMBOL FTHORA MALAKON CHROMA DIFONIAS", 0x00, "Byzantine_Music"),
    c(0x1D0C4, None, "BYZANTINE MUSICAL SYMBOL FTHORA MALAKON CHROMA MONOFONIAS", 0x00, "Byzantine_Music"),
    c(0x1D0C5, None, "BYZANTINE MUSICAL SYMBOL FTHORA SKLIRON CHROMA VASIS", 0x00, "Byzantine_Music"),
    c(0x1D0C6, None, "BYZANTINE MUSICAL SYMBOL FTHORA SKLIRON CHROMA SYNAFI", 0x00, "Byzantine_Music"),
    c(0x1D0C7, None, "BYZANTINE MUSICAL SYMBOL FTHORA NENANO", 0x00, "Byzantine_Music"),
    c(0x1D0C8, None, "BYZANTINE MUSICAL SYMBOL CHROA ZYGOS", 0x00, "Byzantine_Music"),
    c(0x1D0C9, None, "BYZANTINE MUSICAL SYMBOL CHROA KLITON", 0x00, "Byzantine_Music"),
    c(0x1D0CA, None, "BYZANTINE MUSICAL SYMBOL CHROA SPATHI", 0x00, "Byzantine_Music"),
    c(0x1D0CB, None, "BYZANTINE MUSICAL SYMBOL FTHORA I YFESIS TETARTIMORION", 0x00, "Byzantine_Music"),
    c(0x1D0CC, None, "BYZANTINE MUSICAL SYMBOL FTHORA ENARMONIOS ANTIFONIA", 0x00, "Byzantine_Music"),
    c(0x1D0CD, None, "BYZANTINE MUSICAL SYMBOL YFESIS TRITIMORION", 0x00, "Byzantine_Music"),
    c(0x1D0CE, None, "BYZANTINE MUSICAL SYMBOL DIESIS TRITIMORION", 0x00, "Byzantine_Music"),
    c(0x1D0CF, None, "BYZANTINE MUSICAL SYMBOL DIESIS TETARTIMORION", 0x00, "Byzantine_Music"),
    c(0x1D0D0, None, "BYZANTINE MUSICAL SYMBOL DIESIS APLI DYO DODEKATA", 0x00, "Byzantine_Music"),
    c(0x1D0D1, None, "BYZANTINE MUSICAL SYMBOL DIESIS MONOGRAMMOS TESSERA DODEKATA", 0x00, "Byzantine_Music"),
    c(0x1D0D2, None, "BYZANTINE MUSICAL SYMBOL DIESIS DIGRAMMOS EX DODEKATA", 0x00, "Byzantine_Music"),
    c(0x1D0D3, None, "BYZANTINE MUSICAL SYMBOL DIESIS TRIGRAMMOS OKTO DODEKATA", 0x00, "Byzantine_Music"),
    c(0x1D0D4, None, "BYZANTINE MUSICAL SYMBOL YFESIS APLI DYO DODEKATA", 0x00, "Byzantine_Music"),
    c(0x1D0D5, None, "BYZANTINE MUSICAL SYMBOL YFESIS MONOGRAMMOS TESSERA DODEKATA", 0x00, "Byzantine_Music"),
    c(0x1D0D6, None, "BYZANTINE MUSICAL SYMBOL YFESIS DIGRAMMOS EX DODEKATA", 0x00, "Byzantine_Music"),
    c(0x1D0D7, None, "BYZANTINE MUSICAL SYMBOL YFESIS TRIGRAMMOS OKTO DODEKATA", 0x00, "Byzantine_Music"),
    c(0x1D0D8, None, "BYZANTINE MUSICAL SYMBOL GENIKI DIESIS", 0x00, "Byzantine_Music"),
    c(0x1D0D9, None, "BYZANTINE MUSICAL SYMBOL GENIKI YFESIS", 0x00, "Byzantine_Music"),
    c(0x1D0DA, None, "BYZANTINE MUSICAL SYMBOL DIASTOLI APLI MIKRI", 0x00, "Byzantine_Music"),
    c(0x1D0DB, None, "BYZANTINE MUSICAL SYMBOL DIASTOLI APLI MEGALI", 0x00, "Byzantine_Music"),
    c(0x1D0DC, None, "BYZANTINE MUSICAL SYMBOL DIASTOLI DIPLI", 0x00, "Byzantine_Music"),
    c(0x1D0DD, None, "BYZANTINE MUSICAL SYMBOL DIASTOLI THESEOS", 0x00, "Byzantine_Music"),
    c(0x1D0DE, None, "BYZANTINE MUSICAL SYMBOL SIMANSIS THESEOS", 0x00, "Byzantine_Music"),
    c(0x1D0DF, None, "BYZANTINE MUSICAL SYMBOL SIMANSIS THESEOS DISIMOU", 0x00, "Byzantine_Music"),
    c(0x1D0E0, None, "BYZANTINE MUSICAL SYMBOL SIMANSIS THESEOS TRISIMOU", 0x00, "Byzantine_Music"),
    c(0x1D0E1, None, "BYZANTINE MUSICAL SYMBOL SIMANSIS THESEOS TETRASIMOU", 0x00, "Byzantine_Music"),
    c(0x1D0E2, None, "BYZANTINE MUSICAL SYMBOL SIMANSIS ARSEOS", 0x00, "Byzantine_Music"),
    c(0x1D0E3, None, "BYZANTINE MUSICAL SYMBOL SIMANSIS ARSEOS DISIMOU", 0x00, "Byzantine_Music"),
    c(0x1D0E4, None, "BYZANTINE MUSICAL SYMBOL SIMANSIS ARSEOS TRISIMOU", 0x00, "Byzantine_Music"),
    c(0x1D0E5, None, "BYZANTINE MUSICAL SYMBOL SIMANSIS ARSEOS TETRASIMOU", 0x00, "Byzantine_Music"),
    c(0x1D0E6, None, "BYZANTINE MUSICAL SYMBOL DIGRAMMA GG", 0x00, "Byzantine_Music"),
    c(0x1D0E7, None, "BYZANTINE MUSICAL SYMBOL DIFTOGGOS OU", 0x00, "Byzantine_Music"),
    c(0x1D0E8, None, "BYZANTINE MUSICAL SYMBOL STIGMA", 0x00, "Byzantine_Music"),
    c(0x1D0E9, None, "BYZANTINE MUSICAL SYMBOL ARKTIKO PA", 0x00, "Byzantine_Music"),
    c(0x1D0EA, None, "BYZANTINE MUSICAL SYMBOL ARKTIKO VOU", 0x00, "Byzantine_Music"),
    c(0x1D0EB, None, "BYZANTINE MUSICAL SYMBOL ARKTIKO GA", 0x00, "Byzantine_Music"),
    c(0x1D0EC, None, "BYZANTINE MUSICAL SYMBOL ARKTIKO DI", 0x00, "Byzantine_Music"),
    c(0x1D0ED, None, "BYZANTINE MUSICAL SYMBOL ARKTIKO KE", 0x00, "Byzantine_Music"),
    c(0x1D0EE, None, "BYZANTINE MUSICAL SYMBOL ARKTIKO ZO", 0x00, "Byzantine_Music"),
    c(0x1D0EF, None, "BYZANTINE MUSICAL SYMBOL ARKTIKO NI", 0x00, "Byzantine_Music"),
    c(0x1D0F0, None, "BYZANTINE MUSICAL SYMBOL KENTIMATA NEO MESO", 0x00, "Byzantine_Music"),
    c(0x1D0F1, None, "BYZANTINE MUSICAL SYMBOL KENTIMA NEO MESO", 0x00, "Byzantine_Music"),
    c(0x1D0F2, None, "BYZANTINE MUSICAL SYMBOL KENTIMATA NEO KATO", 0x00, "Byzantine_Music"),
    c(0x1D0F3, None, "BYZANTINE MUSICAL SYMBOL KENTIMA NEO KATO", 0x00, "Byzantine_Music"),
    c(0x1D0F4, None, "BYZANTINE MUSICAL SYMBOL KLASMA KATO", 0x00, "Byzantine_Music"),
    c(0x1D0F5, None, "BYZANTINE MUSICAL SYMBOL GORGON NEO KATO", 0x00, "Byzantine_Music"),
    c(0x1D100, None, "MUSICAL SYMBOL SINGLE BARLINE", 0x00, "Music"),
    c(0x1D101, None, "MUSICAL SYMBOL DOUBLE BARLINE", 0x00, "Music"),
    c(0x1D102, None, "MUSICAL SYMBOL FINAL BARLINE", 0x00, "Music"),
    c(0x1D103, None, "MUSICAL SYMBOL REVERSE FINAL BARLINE", 0x00, "Music"),
    c(0x1D104, None, "MUSICAL SYMBOL DASHED BARLINE", 0x00, "Music"),
    c(0x1D105, None, "MUSICAL SYMBOL SHORT BARLINE", 0x00, "Music"),
    c(0x1D106, None, "MUSICAL SYMBOL LEFT REPEAT SIGN", 0x00, "Music"),
    c(0x1D107, None, "MUSICAL SYMBOL RIGHT REPEAT SIGN", 0x00, "Music"),
    c(0x1D108, None, "MUSICAL SYMBOL REPEAT DOTS", 0x00, "Music"),
    c(0x1D109, None, "MUSICAL SYMBOL DAL SEGNO", 0x00, "Music"),
    c(0x1D10A, None, "MUSICAL SYMBOL DA CAPO", 0x00, "Music"),
    c(0x1D10B, None, "MUSICAL SYMBOL SEGNO", 0x00, "Music"),
    c(0x1D10C, None, "MUSICAL SYMBOL CODA", 0x00, "Music"),
    c(0x1D10D, None, "MUSICAL SYMBOL REPEATED FIGURE-1", 0x00, "Music"),
    c(0x1D10E, None, "MUSICAL SYMBOL REPEATED FIGURE-2", 0x00, "Music"),
    c(0x1D10F, None, "MUSICAL SYMBOL REPEATED FIGURE-3", 0x00, "Music"),
    c(0x1D110, None, "MUSICAL SYMBOL FERMATA", 0x00, "Music"),
    c(0x1D111, None, "MUSICAL SYMBOL FERMATA BELOW", 0x00, "Music"),
    c(0x1D112, None, "MUSICAL SYMBOL BREATH MARK", 0x00, "Music"),
    c(0x1D113, None, "MUSICAL SYMBOL CAESURA", 0x00, "Music"),
    c(0x1D114, None, "MUSICAL SYMBOL BRACE", 0x00, "Music"),
    c(0x1D115, None, "MUSICAL SYMBOL BRACKET", 0x00, "Music"),
    c(0x1D116, None, "MUSICAL SYMBOL ONE-LINE STAFF", 0x00, "Music"),
    c(0x1D117, None, "MUSICAL SYMBOL TWO-LINE STAFF", 0x00, "Music"),
    c(0x1D118, None, "MUSICAL SYMBOL THREE-LINE STAFF", 0x00, "Music"),
    c(0x1D119, None, "MUSICAL SYMBOL FOUR-LINE STAFF", 0x00, "Music"),
    c(0x1D11A, None, "MUSICAL SYMBOL FIVE-LINE STAFF", 0x00, "Music"),
    c(0x1D11B, None, "MUSICAL SYMBOL SIX-LINE STAFF", 0x00, "Music"),
    c(0x1D11C, None, "MUSICAL SYMBOL SIX-STRING FRETBOARD", 0x00, "Music"),
    c(0x1D11D, None, "MUSICAL SYMBOL FOUR-STRING FRETBOARD", 0x00, "Music"),
    c(0x1D11E, None, "MUSICAL SYMBOL G CLEF", 0x00, "Music"),
    c(0x1D11F, None, "MUSICAL SYMBOL G CLEF OTTAVA ALTA", 0x00, "Music"),
    c(0x1D120, None, "MUSICAL SYMBOL G CLEF OTTAVA BASSA", 0x00, "Music"),
    c(0x1D121, None, "MUSICAL SYMBOL C CLEF", 0x00, "Music"),
    c(0x1D122, None, "MUSICAL SYMBOL F CLEF", 0x00, "Music"),
    c(0x1D123, None, "MUSICAL SYMBOL F CLEF OTTAVA ALTA", 0x00, "Music"),
    c(0x1D124, None, "MUSICAL SYMBOL F CLEF OTTAVA BASSA", 0x00, "Music"),
    c(0x1D125, None, "MUSICAL SYMBOL DRUM CLEF-1", 0x00, "Music"),
    c(0x1D126, None, "MUSICAL SYMBOL DRUM CLEF-2", 0x00, "Music"),
    c(0x1D129, None, "MUSICAL SYMBOL MULTIPLE MEASURE REST", 0x00, "Music"),
    c(0x1D12A, None, "MUSICAL SYMBOL DOUBLE SHARP", 0x00, "Music"),
    c(0x1D12B, None, "MUSICAL SYMBOL DOUBLE FLAT", 0x00, "Music"),
    c(0x1D12C, None, "MUSICAL SYMBOL FLAT UP", 0x00, "Music"),
    c(0x1D12D, None, "MUSICAL SYMBOL FLAT DOWN", 0x00, "Music"),
    c(0x1D12E, None, "MUSICAL SYMBOL NATURAL UP", 0x00, "Music"),
    c(0x1D12F, None, "MUSICAL SYMBOL NATURAL DOWN", 0x00, "Music"),
    c(0x1D130, None, "MUSICAL SYMBOL SHARP UP", 0x00, "Music"),
    c(0x1D131, None, "MUSICAL SYMBOL SHARP DOWN", 0x00, "Music"),
    c(0x1D132, None, "MUSICAL SYMBOL QUARTER TONE SHARP", 0x00, "Music"),
    c(0x1D133, None, "MUSICAL SYMBOL QUARTER TONE FLAT", 0x00, "Music"),
    c(0x1D134, None, "MUSICAL SYMBOL COMMON TIME", 0x00, "Music"),
    c(0x1D135, None, "MUSICAL SYMBOL CUT TIME", 0x00, "Music"),
    c(0x1D136, None, "MUSICAL SYMBOL OTTAVA ALTA", 0x00, "Music"),
    c(0x1D137, None, "MUSICAL SYMBOL OTTAVA BASSA", 0x00, "Music"),
    c(0x1D138, None, "MUSICAL SYMBOL QUINDICESIMA ALTA", 0x00, "Music"),
    c(0x1D139, None, "MUSICAL SYMBOL QUINDICESIMA BASSA", 0x00, "Music"),
    c(0x1D13A, None, "MUSICAL SYMBOL MULTI REST", 0x00, "Music"),
    c(0x1D13B, None, "MUSICAL SYMBOL WHOLE REST", 0x00, "Music"),
    c(0x1D13C, None, "MUSICAL SYMBOL HALF REST", 0x00, "Music"),
    c(0x1D13D, None, "MUSICAL SYMBOL QUARTER REST", 0x00, "Music"),
    c(0x1D13E, None, "MUSICAL SYMBOL EIGHTH REST", 0x00, "Music"),
    c(0x1D13F, None, "MUSICAL SYMBOL SIXTEENTH REST", 0x00, "Music"),
    c(0x1D140, None, "MUSICAL SYMBOL THIRTY-SECOND REST", 0x00, "Music"),
    c(0x1D141, None, "MUSICAL SYMBOL SIXTY-FOURTH REST", 0x00, "Music"),
    c(0x1D142, None, "MUSICAL SYMBOL ONE HUNDRED TWENTY-EIGHTH REST", 0x00, "Music"),
    c(0x1D143, None, "MUSICAL SYMBOL X NOTEHEAD", 0x00, "Music"),
    c(0x1D144, None, "MUSICAL SYMBOL PLUS NOTEHEAD", 0x00, "Music"),
    c(0x1D145, None, "MUSICAL SYMBOL CIRCLE X NOTEHEAD", 0x00, "Music"),
    c(0x1D146, None, "MUSICAL SYMBOL SQUARE NOTEHEAD WHITE", 0x00, "Music"),
    c(0x1D147, None, "MUSICAL SYMBOL SQUARE NOTEHEAD BLACK", 0x00, "Music"),
    c(0x1D148, None, "MUSICAL SYMBOL TRIANGLE NOTEHEAD UP WHITE", 0x00, "Music"),
    c(0x1D149, None, "MUSICAL SYMBOL TRIANGLE NOTEHEAD UP BLACK", 0x00, "Music"),
    c(0x1D14A, None, "MUSICAL SYMBOL TRIANGLE NOTEHEAD LEFT WHITE", 0x00, "Music"),
    c(0x1D14B, None, "MUSICAL SYMBOL TRIANGLE NOTEHEAD LEFT BLACK", 0x00, "Music"),
    c(0x1D14C, None, "MUSICAL SYMBOL TRIANGLE NOTEHEAD RIGHT WHITE", 0x00, "Music"),
    c(0x1D14D, None, "MUSICAL SYMBOL TRIANGLE NOTEHEAD RIGHT BLACK", 0x00, "Music"),
    c(0x1D14E, None, "MUSICAL SYMBOL TRIANGLE NOTEHEAD DOWN WHITE", 0x00, "Music"),
    c(0x1D14F, None, "MUSICAL SYMBOL TRIANGLE NOTEHEAD DOWN BLACK", 0x00, "Music"),
    c(0x1D150, None, "MUSICAL SYMBOL TRIANGLE NOTEHEAD UP RIGHT WHITE", 0x00, "Music"),
    c(0x1D151, None, "MUSICAL SYMBOL TRIANGLE NOTEHEAD UP RIGHT BLACK", 0x00, "Music"),
    c(0x1D152, None, "MUSICAL SYMBOL MOON NOTEHEAD WHITE", 0x00, "Music"),
    c(0x1D153, None, "MUSICAL SYMBOL MOON NOTEHEAD BLACK", 0x00, "Music"),
    c(0x1D154, None, "MUSICAL SYMBOL TRIANGLE-ROUND NOTEHEAD DOWN WHITE", 0x00, "Music"),
    c(0x1D155, None, "MUSICAL SYMBOL TRIANGLE-ROUND NOTEHEAD DOWN BLACK", 0x00, "Music"),
    c(0x1D156, None, "MUSICAL SYMBOL PARENTHESIS NOTEHEAD", 0x00, "Music"),
    c(0x1D157, None, "MUSICAL SYMBOL VOID NOTEHEAD", 0x00, "Music"),
    c(0x1D158, None, "MUSICAL SYMBOL NOTEHEAD BLACK", 0x00, "Music"),
    c(0x1D159, None, "MUSICAL SYMBOL NULL NOTEHEAD", 0x00, "Music"),
    c(0x1D15A, None, "MUSICAL SYMBOL CLUSTER NOTEHEAD WHITE", 0x00, "Music"),
    c(0x1D15B, None, "MUSICAL SYMBOL CLUSTER NOTEHEAD BLACK", 0x00, "Music"),
    c(0x1D15C, None, "MUSICAL SYMBOL BREVE", 0x00, "Music"),
    c(0x1D15D, None, "MUSICAL SYMBOL WHOLE NOTE", 0x00, "Music"),
    c(0x1D15E, None, "MUSICAL SYMBOL HALF NOTE", 0x00, "Music"),
    c(0x1D15F, None, "MUSICAL SYMBOL QUARTER NOTE", 0x00, "Music"),
    c(0x1D160, None, "MUSICAL SYMBOL EIGHTH NOTE", 0x00, "Music"),
    c(0x1D161, None, "MUSICAL SYMBOL SIXTEENTH NOTE", 0x00, "Music"),
    c(0x1D162, None, "MUSICAL SYMBOL THIRTY-SECOND NOTE", 0x00, "Music"),
    c(0x1D163, None, "MUSICAL SYMBOL SIXTY-FOURTH NOTE", 0x00, "Music"),
    c(0x1D164, None, "MUSICAL SYMBOL ONE HUNDRED TWENTY-EIGHTH NOTE", 0x00, "Music"),
    c(0x1D165, None, "MUSICAL SYMBOL COMBINING STEM", 0x20, "Music"),
    c(0x1D166, None, "MUSICAL SYMBOL COMBINING SPRECHGESANG STEM", 0x20, "Music"),
    c(0x1D167, None, "MUSICAL SYMBOL COMBINING TREMOLO-1", 0x20, "Music"),
    c(0x1D168, None, "MUSICAL SYMBOL COMBINING TREMOLO-2", 0x20, "Music"),
    c(0x1D169, None, "MUSICAL SYMBOL COMBINING TREMOLO-3", 0x20, "Music"),
    c(0x1D16A, None, "MUSICAL SYMBOL FINGERED TREMOLO-1", 0x00, "Music"),
    c(0x1D16B, None, "MUSICAL SYMBOL FINGERED TREMOLO-2", 0x00, "Music"),
    c(0x1D16C, None, "MUSICAL SYMBOL FINGERED TREMOLO-3", 0x00, "Music"),
    c(0x1D16D, None, "MUSICAL SYMBOL COMBINING AUGMENTATION DOT", 0x20, "Music"),
    c(0x1D16E, None, "MUSICAL SYMBOL COMBINING FLAG-1", 0x20, "Music"),
    c(0x1D16F, None, "MUSICAL SYMBOL COMBINING FLAG-2", 0x20, "Music"),
    c(0x1D170, None, "MUSICAL SYMBOL COMBINING FLAG-3", 0x20, "Music"),
    c(0x1D171, None, "MUSICAL SYMBOL COMBINING FLAG-4", 0x20, "Music"),
    c(0x1D172, None, "MUSICAL SYMBOL COMBINING FLAG-5", 0x20, "Music"),
    c(0x1D173, None, "MUSICAL SYMBOL BEGIN BEAM", 0x00, "Music"),
    c(0x1D174, None, "MUSICAL SYMBOL END BEAM", 0x00, "Music"),
    c(0x1D175, None, "MUSICAL SYMBOL BEGIN TIE", 0x00, "Music"),
    c(0x1D176, None, "MUSICAL SYMBOL END TIE", 0x00, "Music"),
    c(0x1D177, None, "MUSICAL SYMBOL BEGIN SLUR", 0x00, "Music"),
    c(0x1D178, None, "MUSICAL SYMBOL END SLUR", 0x00, "Music"),
    c(0x1D179, None, "MUSICAL SYMBOL BEGIN PHRASE", 0x00, "Music"),
    c(0x1D17A, None, "MUSICAL SYMBOL END PHRASE", 0x00, "Music"),
    c(0x1D17B, None, "MUSICAL SYMBOL COMBINING ACCENT", 0x20, "Music"),
    c(0x1D17C, None, "MUSICAL SYMBOL COMBINING STACCATO", 0x20, "Music"),
    c(0x1D17D, None, "MUSICAL SYMBOL COMBINING TENUTO", 0x20, "Music"),
    c(0x1D17E, None, "MUSICAL SYMBOL COMBINING STACCATISSIMO", 0x20, "Music"),
    c(0x1D17F, None, "MUSICAL SYMBOL COMBINING MARCATO", 0x20, "Music"),
    c(0x1D180, None, "MUSICAL SYMBOL COMBINING MARCATO-STACCATO", 0x20, "Music"),
    c(0x1D181, None, "MUSICAL SYMBOL COMBINING ACCENT-STACCATO", 0x20, "Music"),
    c(0x1D182, None, "MUSICAL SYMBOL COMBINING LOURE", 0x20, "Music"),
    c(0x1D183, None, "MUSICAL SYMBOL ARPEGGIATO UP", 0x00, "Music"),
    c(0x1D184, None, "MUSICAL SYMBOL ARPEGGIATO DOWN", 0x00, "Music"),
    c(0x1D185, None, "MUSICAL SYMBOL COMBINING DOIT", 0x20, "Music"),
    c(0x1D186, None, "MUSICAL SYMBOL COMBINING RIP", 0x20, "Music"),
    c(0x1D187, None, "MUSICAL SYMBOL COMBINING FLIP", 0x20, "Music"),
    c(0x1D188, None, "MUSICAL SYMBOL COMBINING SMEAR", 0x20, "Music"),
    c(0x1D189, None, "MUSICAL SYMBOL COMBINING BEND", 0x20, "Music"),
    c(0x1D18A, None, "MUSICAL SYMBOL COMBINING DOUBLE TONGUE", 0x20, "Music"),
    c(0x1D18B, None, "MUSICAL SYMBOL COMBINING TRIPLE TONGUE", 0x20, "Music"),
    c(0x1D18C, None, "MUSICAL SYMBOL RINFORZANDO", 0x00, "Music"),
    c(0x1D18D, None, "MUSICAL SYMBOL SUBITO", 0x00, "Music"),
    c(0x1D18E, None, "MUSICAL SYMBOL Z", 0x00, "Music"),
    c(0x1D18F, None, "MUSICAL SYMBOL PIANO", 0x00, "Music"),
    c(0x1D190, None, "MUSICAL SYMBOL MEZZO", 0x00, "Music"),
    c(0x1D191, None, "MUSICAL SYMBOL FORTE", 0x00, "Music"),
    c(0x1D192, None, "MUSICAL SYMBOL CRESCENDO", 0x00, "Music"),
    c(0x1D193, None, "MUSICAL SYMBOL DECRESCENDO", 0x00, "Music"),
    c(0x1D194, None, "MUSICAL SYMBOL GRACE NOTE SLASH", 0x00, "Music"),
    c(0x1D195, None, "MUSICAL SYMBOL GRACE NOTE NO SLASH", 0x00, "Music"),
    c(0x1D196, None, "MUSICAL SYMBOL TR", 0x00, "Music"),
    c(0x1D197, None, "MUSICAL SYMBOL TURN", 0x00, "Music"),
    c(0x1D198, None, "MUSICAL SYMBOL INVERTED TURN", 0x00, "Music"),
    c(0x1D199, None, "MUSICAL SYMBOL TURN SLASH", 0x00, "Music"),
    c(0x1D19A, None, "MUSICAL SYMBOL TURN UP", 0x00, "Music"),
    c(0x1D19B, None, "MUSICAL SYMBOL ORNAMENT STROKE-1", 0x00, "Music"),
    c(0x1D19C, None, "MUSICAL SYMBOL ORNAMENT STROKE-2", 0x00, "Music"),
    c(0x1D19D, None, "MUSICAL SYMBOL ORNAMENT STROKE-3", 0x00, "Music"),
    c(0x1D19E, None, "MUSICAL SYMBOL ORNAMENT STROKE-4", 0x00, "Music"),
    c(0x1D19F, None, "MUSICAL SYMBOL ORNAMENT STROKE-5", 0x00, "Music"),
    c(0x1D1A0, None, "MUSICAL SYMBOL ORNAMENT STROKE-6", 0x00, "Music"),
    c(0x1D1A1, None, "MUSICAL SYMBOL ORNAMENT STROKE-7", 0x00, "Music"),
    c(0x1D1A2, None, "MUSICAL SYMBOL ORNAMENT STROKE-8", 0x00, "Music"),
    c(0x1D1A3, None, "MUSICAL SYMBOL ORNAMENT STROKE-9", 0x00, "Music"),
    c(0x1D1A4, None, "MUSICAL SYMBOL ORNAMENT STROKE-10", 0x00, "Music"),
    c(0x1D1A5, None, "MUSICAL SYMBOL ORNAMENT STROKE-11", 0x00, "Music"),
    c(0x1D1A6, None, "MUSICAL SYMBOL HAUPTSTIMME", 0x00, "Music"),
    c(0x1D1A7, None, "MUSICAL SYMBOL NEBENSTIMME", 0x00, "Music"),
    c(0x1D1A8, None, "MUSICAL SYMBOL END OF STIMME", 0x00, "Music"),
    c(0x1D1A9, None, "MUSICAL SYMBOL DEGREE SLASH", 0x00, "Music"),
    c(0x1D1AA, None, "MUSICAL SYMBOL COMBINING DOWN BOW", 0x20, "Music"),
    c(0x1D1AB, None, "MUSICAL SYMBOL COMBINING UP BOW", 0x20, "Music"),
    c(0x1D1AC, None, "MUSICAL SYMBOL COMBINING HARMONIC", 0x20, "Music"),
    c(0x1D1AD, None, "MUSICAL SYMBOL COMBINING SNAP PIZZICATO", 0x20, "Music"),
    c(0x1D1AE, None, "MUSICAL SYMBOL PEDAL MARK", 0x00, "Music"),
    c(0x1D1AF, None, "MUSICAL SYMBOL PEDAL UP MARK", 0x00, "Music"),
    c(0x1D1B0, None, "MUSICAL SYMBOL HALF PEDAL MARK", 0x00, "Music"),
    c(0x1D1B1, None, "MUSICAL SYMBOL GLISSANDO UP", 0x00, "Music"),
    c(0x1D1B2, None, "MUSICAL SYMBOL GLISSANDO DOWN", 0x00, "Music"),
    c(0x1D1B3, None, "MUSICAL SYMBOL WITH FINGERNAILS", 0x00, "Music"),
    c(0x1D1B4, None, "MUSICAL SYMBOL DAMP", 0x00, "Music"),
    c(0x1D1B5, None, "MUSICAL SYMBOL DAMP ALL", 0x00, "Music"),
    c(0x1D1B6, None, "MUSICAL SYMBOL MAXIMA", 0x00, "Music"),
    c(0x1D1B7, None, "MUSICAL SYMBOL LONGA", 0x00, "Music"),
    c(0x1D1B8, None, "MUSICAL SYMBOL BREVIS", 0x00, "Music"),
    c(0x1D1B9, None, "MUSICAL SYMBOL SEMIBREVIS WHITE", 0x00, "Music"),
    c(0x1D1BA, None, "MUSICAL SYMBOL SEMIBREVIS BLACK", 0x00, "Music"),
    c(0x1D1BB, None, "MUSICAL SYMBOL MINIMA", 0x00, "Music"),
    c(0x1D1BC, None, "MUSICAL SYMBOL MINIMA BLACK", 0x00, "Music"),
    c(0x1D1BD, None, "MUSICAL SYMBOL SEMIMINIMA WHITE", 0x00, "Music"),
    c(0x1D1BE, None, "MUSICAL SYMBOL SEMIMINIMA BLACK", 0x00, "Music"),
    c(0x1D1BF, None, "MUSICAL SYMBOL FUSA WHITE", 0x00, "Music"),
    c(0x1D1C0, None, "MUSICAL SYMBOL FUSA BLACK", 0x00, "Music"),
    c(0x1D1C1, None, "MUSICAL SYMBOL LONGA PERFECTA REST", 0x00, "Music"),
    c(0x1D1C2, None, "MUSICAL SYMBOL LONGA IMPERFECTA REST", 0x00, "Music"),
    c(0x1D1C3, None, "MUSICAL SYMBOL BREVIS REST", 0x00, "Music"),
    c(0x1D1C4, None, "MUSICAL SYMBOL SEMIBREVIS REST", 0x00, "Music"),
    c(0x1D1C5, None, "MUSICAL SYMBOL MINIMA REST", 0x00, "Music"),
    c(0x1D1C6, None, "MUSICAL SYMBOL SEMIMINIMA REST", 0x00, "Music"),
    c(0x1D1C7, None, "MUSICAL SYMBOL TEMPUS PERFECTUM CUM PROLATIONE PERFECTA", 0x00, "Music"),
    c(0x1D1C8, None, "MUSICAL SYMBOL TEMPUS PERFECTUM CUM PROLATIONE IMPERFECTA", 0x00, "Music"),
    c(0x1D1C9, None, "MUSICAL SYMBOL TEMPUS PERFECTUM CUM PROLATIONE PERFECTA DIMINUTION-1", 0x00, "Music"),
    c(0x1D1CA, None, "MUSICAL SYMBOL TEMPUS IMPERFECTUM CUM PROLATIONE PERFECTA", 0x00, "Music"),
    c(0x1D1CB, None, "MUSICAL SYMBOL TEMPUS IMPERFECTUM CUM PROLATIONE IMPERFECTA", 0x00, "Music"),
    c(0x1D1CC, None, "MUSICAL SYMBOL TEMPUS IMPERFECTUM CUM PROLATIONE IMPERFECTA DIMINUTION-1", 0x00, "Music"),
    c(0x1D1CD, None, "MUSICAL SYMBOL TEMPUS IMPERFECTUM CUM PROLATIONE IMPERFECTA DIMINUTION-2", 0x00, "Music"),
    c(0x1D1CE, None, "MUSICAL SYMBOL TEMPUS IMPERFECTUM CUM PROLATIONE IMPERFECTA DIMINUTION-3", 0x00, "Music"),
    c(0x1D1CF, None, "MUSICAL SYMBOL CROIX", 0x00, "Music"),
    c(0x1D1D0, None, "MUSICAL SYMBOL GREGORIAN C CLEF", 0x00, "Music"),
    c(0x1D1D1, None, "MUSICAL SYMBOL GREGORIAN F CLEF", 0x00, "Music"),
    c(0x1D1D2, None, "MUSICAL SYMBOL SQUARE B", 0x00, "Music"),
    c(0x1D1D3, None, "MUSICAL SYMBOL VIRGA", 0x00, "Music"),
    c(0x1D1D4, None, "MUSICAL SYMBOL PODATUS", 0x00, "Music"),
    c(0x1D1D5, None, "MUSICAL SYMBOL CLIVIS", 0x00, "Music"),
    c(0x1D1D6, None, "MUSICAL SYMBOL SCANDICUS", 0x00, "Music"),
    c(0x1D1D7, None, "MUSICAL SYMBOL CLIMACUS", 0x00, "Music"),
    c(0x1D1D8, None, "MUSICAL SYMBOL TORCULUS", 0x00, "Music"),
    c(0x1D1D9, None, "MUSICAL SYMBOL PORRECTUS", 0x00, "Music"),
    c(0x1D1DA, None, "MUSICAL SYMBOL PORRECTUS FLEXUS", 0x00, "Music"),
    c(0x1D1DB, None, "MUSICAL SYMBOL SCANDICUS FLEXUS", 0x00, "Music"),
    c(0x1D1DC, None, "MUSICAL SYMBOL TORCULUS RESUPINUS", 0x00, "Music"),
    c(0x1D1DD, None, "MUSICAL SYMBOL PES SUBPUNCTIS", 0x00, "Music"),
    c(0x1D1DE, None, "MUSICAL SYMBOL KIEVAN C CLEF", 0x00, "Music"),
    c(0x1D1DF, None, "MUSICAL SYMBOL KIEVAN END OF PIECE", 0x00, "Music"),
    c(0x1D1E0, None, "MUSICAL SYMBOL KIEVAN FINAL NOTE", 0x00, "Music"),
    c(0x1D1E1, None, "MUSICAL SYMBOL KIEVAN RECITATIVE MARK", 0x00, "Music"),
    c(0x1D1E2, None, "MUSICAL SYMBOL KIEVAN WHOLE NOTE", 0x00, "Music"),
    c(0x1D1E3, None, "MUSICAL SYMBOL KIEVAN HALF NOTE", 0x00, "Music"),
    c(0x1D1E4, None, "MUSICAL SYMBOL KIEVAN QUARTER NOTE STEM DOWN", 0x00, "Music"),
    c(0x1D1E5, None, "MUSICAL SYMBOL KIEVAN QUARTER NOTE STEM UP", 0x00, "Music"),
    c(0x1D1E6, None, "MUSICAL SYMBOL KIEVAN EIGHTH NOTE STEM DOWN", 0x00, "Music"),
    c(0x1D1E7, None, "MUSICAL SYMBOL KIEVAN EIGHTH NOTE STEM UP", 0x00, "Music"),
    c(0x1D1E8, None, "MUSICAL SYMBOL KIEVAN FLAT SIGN", 0x00, "Music"),
    c(0x1D1E9, None, "MUSICAL SYMBOL SORI", 0x00, "Music"),
    c(0x1D1EA, None, "MUSICAL SYMBOL KORON", 0x00, "Music"),
    c(0x1D200, None, "GREEK VOCAL NOTATION SYMBOL-1", 0x00, "Ancient_Greek_Music"),
    c(0x1D201, None, "GREEK VOCAL NOTATION SYMBOL-2", 0x00, "Ancient_Greek_Music"),
    c(0x1D202, None, "GREEK VOCAL NOTATION SYMBOL-3", 0x00, "Ancient_Greek_Music"),
    c(0x1D203, None, "GREEK VOCAL NOTATION SYMBOL-4", 0x00, "Ancient_Greek_Music"),
    c(0x1D204, None, "GREEK VOCAL NOTATION SYMBOL-5", 0x00, "Ancient_Greek_Music"),
    c(0x1D205, None, "GREEK VOCAL NOTATION SYMBOL-6", 0x00, "Ancient_Greek_Music"),
    c(0x1D206, None, "GREEK VOCAL NOTATION SYMBOL-7", 0x00, "Ancient_Greek_Music"),
    c(0x1D207, None, "GREEK VOCAL NOTATION SYMBOL-8", 0x00, "Ancient_Greek_Music"),
    c(0x1D208, None, "GREEK VOCAL NOTATION SYMBOL-9", 0x00, "Ancient_Greek_Music"),
    c(0x1D209, None, "GREEK VOCAL NOTATION SYMBOL-10", 0x00, "Ancient_Greek_Music"),
    c(0x1D20A, None, "GREEK VOCAL NOTATION SYMBOL-11", 0x00, "Ancient_Greek_Music"),
    c(0x1D20B, None, "GREEK VOCAL NOTATION SYMBOL-12", 0x00, "Ancient_Greek_Music"),
    c(0x1D20C, None, "GREEK VOCAL NOTATION SYMBOL-13", 0x00, "Ancient_Greek_Music"),
    c(0x1D20D, None, "GREEK VOCAL NOTATION SYMBOL-14", 0x00, "Ancient_Greek_Music"),
    c(0x1D20E, None, "GREEK VOCAL NOTATION SYMBOL-15", 0x00, "Ancient_Greek_Music"),
    c(0x1D20F, None, "GREEK VOCAL NOTATION SYMBOL-16", 0x00, "Ancient_Greek_Music"),
    c(0x1D210, None, "GREEK VOCAL NOTATION SYMBOL-17", 0x00, "Ancient_Greek_Music"),
    c(0x1D211, None, "GREEK VOCAL NOTATION SYMBOL-18", 0x00, "Ancient_Greek_Music"),
    c(0x1D212, None, "GREEK VOCAL NOTATION SYMBOL-19", 0x00, "Ancient_Greek_Music"),
    c(0x1D213, None, "GREEK VOCAL NOTATION SYMBOL-20", 0x00, "Ancient_Greek_Music"),
    c(0x1D214, None, "GREEK VOCAL NOTATION SYMBOL-21", 0x00, "Ancient_Greek_Music"),
    c(0x1D215, None, "GREEK VOCAL NOTATION SYMBOL-22", 0x00, "Ancient_Greek_Music"),
    c(0x1D216, None, "GREEK VOCAL NOTATION SYMBOL-23", 0x00, "Ancient_Greek_Music"),
    c(0x1D217, None, "GREEK VOCAL NOTATION SYMBOL-24", 0x00, "Ancient_Greek_Music"),
    c(0x1D218, None, "GREEK VOCAL NOTATION SYMBOL-50", 0x00, "Ancient_Greek_Music"),
    c(0x1D219, None, "GREEK VOCAL NOTATION SYMBOL-51", 0x00, "Ancient_Greek_Music"),
    c(0x1D21A, None, "GREEK VOCAL NOTATION SYMBOL-52", 0x00, "Ancient_Greek_Music"),
    c(0x1D21B, None, "GREEK VOCAL NOTATION SYMBOL-53", 0x00, "Ancient_Greek_Music"),
    c(0x1D21C, None, "GREEK VOCAL NOTATION SYMBOL-54", 0x00, "Ancient_Greek_Music"),
    c(0x1D21D, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-1", 0x00, "Ancient_Greek_Music"),
    c(0x1D21E, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-2", 0x00, "Ancient_Greek_Music"),
    c(0x1D21F, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-4", 0x00, "Ancient_Greek_Music"),
    c(0x1D220, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-5", 0x00, "Ancient_Greek_Music"),
    c(0x1D221, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-7", 0x00, "Ancient_Greek_Music"),
    c(0x1D222, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-8", 0x00, "Ancient_Greek_Music"),
    c(0x1D223, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-11", 0x00, "Ancient_Greek_Music"),
    c(0x1D224, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-12", 0x00, "Ancient_Greek_Music"),
    c(0x1D225, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-13", 0x00, "Ancient_Greek_Music"),
    c(0x1D226, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-14", 0x00, "Ancient_Greek_Music"),
    c(0x1D227, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-17", 0x00, "Ancient_Greek_Music"),
    c(0x1D228, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-18", 0x00, "Ancient_Greek_Music"),
    c(0x1D229, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-19", 0x00, "Ancient_Greek_Music"),
    c(0x1D22A, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-23", 0x00, "Ancient_Greek_Music"),
    c(0x1D22B, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-24", 0x00, "Ancient_Greek_Music"),
    c(0x1D22C, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-25", 0x00, "Ancient_Greek_Music"),
    c(0x1D22D, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-26", 0x00, "Ancient_Greek_Music"),
    c(0x1D22E, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-27", 0x00, "Ancient_Greek_Music"),
    c(0x1D22F, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-29", 0x00, "Ancient_Greek_Music"),
    c(0x1D230, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-30", 0x00, "Ancient_Greek_Music"),
    c(0x1D231, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-32", 0x00, "Ancient_Greek_Music"),
    c(0x1D232, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-36", 0x00, "Ancient_Greek_Music"),
    c(0x1D233, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-37", 0x00, "Ancient_Greek_Music"),
    c(0x1D234, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-38", 0x00, "Ancient_Greek_Music"),
    c(0x1D235, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-39", 0x00, "Ancient_Greek_Music"),
    c(0x1D236, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-40", 0x00, "Ancient_Greek_Music"),
    c(0x1D237, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-42", 0x00, "Ancient_Greek_Music"),
    c(0x1D238, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-43", 0x00, "Ancient_Greek_Music"),
    c(0x1D239, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-45", 0x00, "Ancient_Greek_Music"),
    c(0x1D23A, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-47", 0x00, "Ancient_Greek_Music"),
    c(0x1D23B, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-48", 0x00, "Ancient_Greek_Music"),
    c(0x1D23C, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-49", 0x00, "Ancient_Greek_Music"),
    c(0x1D23D, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-50", 0x00, "Ancient_Greek_Music"),
    c(0x1D23E, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-51", 0x00, "Ancient_Greek_Music"),
    c(0x1D23F, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-52", 0x00, "Ancient_Greek_Music"),
    c(0x1D240, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-53", 0x00, "Ancient_Greek_Music"),
    c(0x1D241, None, "GREEK INSTRUMENTAL NOTATION SYMBOL-54", 0x00, "Ancient_Greek_Music"),
    c(0x1D242, None, "COMBINING GREEK MUSICAL TRISEME", 0x20, "Ancient_Greek_Music"),
    c(0x1D243, None, "COMBINING GREEK MUSICAL TETRASEME", 0x20, "Ancient_Greek_Music"),
    c(0x1D244, None, "COMBINING GREEK MUSICAL PENTASEME", 0x20, "Ancient_Greek_Music"),
    c(0x1D245, None, "GREEK MUSICAL LEIMMA", 0x00, "Ancient_Greek_Music"),
    c(0x1D2E0, None, "MAYAN NUMERAL ZERO", 0x00, "Mayan_Numerals"),
    c(0x1D2E1, None, "MAYAN NUMERAL ONE", 0x00, "Mayan_Numerals"),
    c(0x1D2E2, None, "MAYAN NUMERAL TWO", 0x00, "Mayan_Numerals"),
    c(0x1D2E3, None, "MAYAN NUMERAL THREE", 0x00, "Mayan_Numerals"),
    c(0x1D2E4, None, "MAYAN NUMERAL FOUR", 0x00, "Mayan_Numerals"),
    c(0x1D2E5, None, "MAYAN NUMERAL FIVE", 0x00, "Mayan_Numerals"),
    c(0x1D2E6, None, "MAYAN NUMERAL SIX", 0x00, "Mayan_Numerals"),
    c(0x1D2E7, None, "MAYAN NUMERAL SEVEN", 0x00, "Mayan_Numerals"),
    c(0x1D2E8, None, "MAYAN NUMERAL EIGHT", 0x00, "Mayan_Numerals"),
    c(0x1D2E9, None, "MAYAN NUMERAL NINE", 0x00, "Mayan_Numerals"),
    c(0x1D2EA, None, "MAYAN NUMERAL TEN", 0x00, "Mayan_Numerals"),
    c(0x1D2EB, None, "MAYAN NUMERAL ELEVEN", 0x00, "Mayan_Numerals"),
    c(0x1D2EC, None, "MAYAN NUMERAL TWELVE", 0x00, "Mayan_Numerals"),
    c(0x1D2ED, None, "MAYAN NUMERAL THIRTEEN", 0x00, "Mayan_Numerals"),
    c(0x1D2EE, None, "MAYAN NUMERAL FOURTEEN", 0x00, "Mayan_Numerals"),
    c(0x1D2EF, None, "MAYAN NUMERAL FIFTEEN", 0x00, "Mayan_Numerals"),
    c(0x1D2F0, None, "MAYAN NUMERAL SIXTEEN", 0x00, "Mayan_Numerals"),
    c(0x1D2F1, None, "MAYAN NUMERAL SEVENTEEN", 0x00, "Mayan_Numerals"),
    c(0x1D2F2, None, "MAYAN NUMERAL EIGHTEEN", 0x00, "Mayan_Numerals"),
    c(0x1D2F3, None, "MAYAN NUMERAL NINETEEN", 0x00, "Mayan_Numerals"),
    c(0x1D300, None, "MONOGRAM FOR EARTH", 0x00, "Tai_Xuan_Jing"),
    c(0x1D301, None, "DIGRAM FOR HEAVENLY EARTH", 0x00, "Tai_Xuan_Jing"),
    c(0x1D302, None, "DIGRAM FOR HUMAN EARTH", 0x00, "Tai_Xuan_Jing"),
    c(0x1D303, None, "DIGRAM FOR EARTHLY HEAVEN", 0x00, "Tai_Xuan_Jing"),
    c(0x1D304, None, "DIGRAM FOR EARTHLY HUMAN", 0x00, "Tai_Xuan_Jing"),
    c(0x1D305, None, "DIGRAM FOR EARTH", 0x00, "Tai_Xuan_Jing"),
    c(0x1D306, None, "TETRAGRAM FOR CENTRE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D307, None, "TETRAGRAM FOR FULL CIRCLE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D308, None, "TETRAGRAM FOR MIRED", 0x00, "Tai_Xuan_Jing"),
    c(0x1D309, None, "TETRAGRAM FOR BARRIER", 0x00, "Tai_Xuan_Jing"),
    c(0x1D30A, None, "TETRAGRAM FOR KEEPING SMALL", 0x00, "Tai_Xuan_Jing"),
    c(0x1D30B, None, "TETRAGRAM FOR CONTRARIETY", 0x00, "Tai_Xuan_Jing"),
    c(0x1D30C, None, "TETRAGRAM FOR ASCENT", 0x00, "Tai_Xuan_Jing"),
    c(0x1D30D, None, "TETRAGRAM FOR OPPOSITION", 0x00, "Tai_Xuan_Jing"),
    c(0x1D30E, None, "TETRAGRAM FOR BRANCHING OUT", 0x00, "Tai_Xuan_Jing"),
    c(0x1D30F, None, "TETRAGRAM FOR DEFECTIVENESS OR DISTORTION", 0x00, "Tai_Xuan_Jing"),
    c(0x1D310, None, "TETRAGRAM FOR DIVERGENCE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D311, None, "TETRAGRAM FOR YOUTHFULNESS", 0x00, "Tai_Xuan_Jing"),
    c(0x1D312, None, "TETRAGRAM FOR INCREASE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D313, None, "TETRAGRAM FOR PENETRATION", 0x00, "Tai_Xuan_Jing"),
    c(0x1D314, None, "TETRAGRAM FOR REACH", 0x00, "Tai_Xuan_Jing"),
    c(0x1D315, None, "TETRAGRAM FOR CONTACT", 0x00, "Tai_Xuan_Jing"),
    c(0x1D316, None, "TETRAGRAM FOR HOLDING BACK", 0x00, "Tai_Xuan_Jing"),
    c(0x1D317, None, "TETRAGRAM FOR WAITING", 0x00, "Tai_Xuan_Jing"),
    c(0x1D318, None, "TETRAGRAM FOR FOLLOWING", 0x00, "Tai_Xuan_Jing"),
    c(0x1D319, None, "TETRAGRAM FOR ADVANCE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D31A, None, "TETRAGRAM FOR RELEASE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D31B, None, "TETRAGRAM FOR RESISTANCE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D31C, None, "TETRAGRAM FOR EASE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D31D, None, "TETRAGRAM FOR JOY", 0x00, "Tai_Xuan_Jing"),
    c(0x1D31E, None, "TETRAGRAM FOR CONTENTION", 0x00, "Tai_Xuan_Jing"),
    c(0x1D31F, None, "TETRAGRAM FOR ENDEAVOUR", 0x00, "Tai_Xuan_Jing"),
    c(0x1D320, None, "TETRAGRAM FOR DUTIES", 0x00, "Tai_Xuan_Jing"),
    c(0x1D321, None, "TETRAGRAM FOR CHANGE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D322, None, "TETRAGRAM FOR DECISIVENESS", 0x00, "Tai_Xuan_Jing"),
    c(0x1D323, None, "TETRAGRAM FOR BOLD RESOLUTION", 0x00, "Tai_Xuan_Jing"),
    c(0x1D324, None, "TETRAGRAM FOR PACKING", 0x00, "Tai_Xuan_Jing"),
    c(0x1D325, None, "TETRAGRAM FOR LEGION", 0x00, "Tai_Xuan_Jing"),
    c(0x1D326, None, "TETRAGRAM FOR CLOSENESS", 0x00, "Tai_Xuan_Jing"),
    c(0x1D327, None, "TETRAGRAM FOR KINSHIP", 0x00, "Tai_Xuan_Jing"),
    c(0x1D328, None, "TETRAGRAM FOR GATHERING", 0x00, "Tai_Xuan_Jing"),
    c(0x1D329, None, "TETRAGRAM FOR STRENGTH", 0x00, "Tai_Xuan_Jing"),
    c(0x1D32A, None, "TETRAGRAM FOR PURITY", 0x00, "Tai_Xuan_Jing"),
    c(0x1D32B, None, "TETRAGRAM FOR FULLNESS", 0x00, "Tai_Xuan_Jing"),
    c(0x1D32C, None, "TETRAGRAM FOR RESIDENCE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D32D, None, "TETRAGRAM FOR LAW OR MODEL", 0x00, "Tai_Xuan_Jing"),
    c(0x1D32E, None, "TETRAGRAM FOR RESPONSE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D32F, None, "TETRAGRAM FOR GOING TO MEET", 0x00, "Tai_Xuan_Jing"),
    c(0x1D330, None, "TETRAGRAM FOR ENCOUNTERS", 0x00, "Tai_Xuan_Jing"),
    c(0x1D331, None, "TETRAGRAM FOR STOVE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D332, None, "TETRAGRAM FOR GREATNESS", 0x00, "Tai_Xuan_Jing"),
    c(0x1D333, None, "TETRAGRAM FOR ENLARGEMENT", 0x00, "Tai_Xuan_Jing"),
    c(0x1D334, None, "TETRAGRAM FOR PATTERN", 0x00, "Tai_Xuan_Jing"),
    c(0x1D335, None, "TETRAGRAM FOR RITUAL", 0x00, "Tai_Xuan_Jing"),
    c(0x1D336, None, "TETRAGRAM FOR FLIGHT", 0x00, "Tai_Xuan_Jing"),
    c(0x1D337, None, "TETRAGRAM FOR VASTNESS OR WASTING", 0x00, "Tai_Xuan_Jing"),
    c(0x1D338, None, "TETRAGRAM FOR CONSTANCY", 0x00, "Tai_Xuan_Jing"),
    c(0x1D339, None, "TETRAGRAM FOR MEASURE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D33A, None, "TETRAGRAM FOR ETERNITY", 0x00, "Tai_Xuan_Jing"),
    c(0x1D33B, None, "TETRAGRAM FOR UNITY", 0x00, "Tai_Xuan_Jing"),
    c(0x1D33C, None, "TETRAGRAM FOR DIMINISHMENT", 0x00, "Tai_Xuan_Jing"),
    c(0x1D33D, None, "TETRAGRAM FOR CLOSED MOUTH", 0x00, "Tai_Xuan_Jing"),
    c(0x1D33E, None, "TETRAGRAM FOR GUARDEDNESS", 0x00, "Tai_Xuan_Jing"),
    c(0x1D33F, None, "TETRAGRAM FOR GATHERING IN", 0x00, "Tai_Xuan_Jing"),
    c(0x1D340, None, "TETRAGRAM FOR MASSING", 0x00, "Tai_Xuan_Jing"),
    c(0x1D341, None, "TETRAGRAM FOR ACCUMULATION", 0x00, "Tai_Xuan_Jing"),
    c(0x1D342, None, "TETRAGRAM FOR EMBELLISHMENT", 0x00, "Tai_Xuan_Jing"),
    c(0x1D343, None, "TETRAGRAM FOR DOUBT", 0x00, "Tai_Xuan_Jing"),
    c(0x1D344, None, "TETRAGRAM FOR WATCH", 0x00, "Tai_Xuan_Jing"),
    c(0x1D345, None, "TETRAGRAM FOR SINKING", 0x00, "Tai_Xuan_Jing"),
    c(0x1D346, None, "TETRAGRAM FOR INNER", 0x00, "Tai_Xuan_Jing"),
    c(0x1D347, None, "TETRAGRAM FOR DEPARTURE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D348, None, "TETRAGRAM FOR DARKENING", 0x00, "Tai_Xuan_Jing"),
    c(0x1D349, None, "TETRAGRAM FOR DIMMING", 0x00, "Tai_Xuan_Jing"),
    c(0x1D34A, None, "TETRAGRAM FOR EXHAUSTION", 0x00, "Tai_Xuan_Jing"),
    c(0x1D34B, None, "TETRAGRAM FOR SEVERANCE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D34C, None, "TETRAGRAM FOR STOPPAGE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D34D, None, "TETRAGRAM FOR HARDNESS", 0x00, "Tai_Xuan_Jing"),
    c(0x1D34E, None, "TETRAGRAM FOR COMPLETION", 0x00, "Tai_Xuan_Jing"),
    c(0x1D34F, None, "TETRAGRAM FOR CLOSURE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D350, None, "TETRAGRAM FOR FAILURE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D351, None, "TETRAGRAM FOR AGGRAVATION", 0x00, "Tai_Xuan_Jing"),
    c(0x1D352, None, "TETRAGRAM FOR COMPLIANCE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D353, None, "TETRAGRAM FOR ON THE VERGE", 0x00, "Tai_Xuan_Jing"),
    c(0x1D354, None, "TETRAGRAM FOR DIFFICULTIES", 0x00, "Tai_Xuan_Jing"),
    c(0x1D355, None, "TETRAGRAM FOR LABOURING", 0x00, "Tai_Xuan_Jing"),
    c(0x1D356, None, "TETRAGRAM FOR FOSTERING", 0x00, "Tai_Xuan_Jing"),
    c(0x1D360, None, "COUNTING ROD UNIT DIGIT ONE", 0x00, "Counting_Rod"),
    c(0x1D361, None, "COUNTING ROD UNIT DIGIT TWO", 0x00, "Counting_Rod"),
    c(0x1D362, None, "COUNTING ROD UNIT DIGIT THREE", 0x00, "Counting_Rod"),
    c(0x1D363, None, "COUNTING ROD UNIT DIGIT FOUR", 0x00, "Counting_Rod"),
    c(0x1D364, None, "COUNTING ROD UNIT DIGIT FIVE", 0x00, "Counting_Rod"),
    c(0x1D365, None, "COUNTING ROD UNIT DIGIT SIX", 0x00, "Counting_Rod"),
    c(0x1D366, None, "COUNTING ROD UNIT DIGIT SEVEN", 0x00, "Counting_Rod"),
    c(0x1D367, None, "COUNTING ROD UNIT DIGIT EIGHT", 0x00, "Counting_Rod"),
    c(0x1D368, None, "COUNTING ROD UNIT DIGIT NINE", 0x00, "Counting_Rod"),
    c(0x1D369, None, "COUNTING ROD TENS DIGIT ONE", 0x00, "Counting_Rod"),
    c(0x1D36A, None, "COUNTING ROD TENS DIGIT TWO", 0x00, "Counting_Rod"),
    c(0x1D36B, None, "COUNTING ROD TENS DIGIT THREE", 0x00, "Counting_Rod"),
    c(0x1D36C, None, "COUNTING ROD TENS DIGIT FOUR", 0x00, "Counting_Rod"),
    c(0x1D36D, None, "COUNTING ROD TENS DIGIT FIVE", 0x00, "Counting_Rod"),
    c(0x1D36E, None, "COUNTING ROD TENS DIGIT SIX", 0x00, "Counting_Rod"),
    c(0x1D36F, None, "COUNTING ROD TENS DIGIT SEVEN", 0x00, "Counting_Rod"),
    c(0x1D370, None, "COUNTING ROD TENS DIGIT EIGHT", 0x00, "Counting_Rod"),
    c(0x1D371, None, "COUNTING ROD TENS DIGIT NINE", 0x00, "Counting_Rod"),
    c(0x1D372, None, "IDEOGRAPHIC TALLY MARK ONE", 0x00, "Counting_Rod"),
    c(0x1D373, None, "IDEOGRAPHIC TALLY MARK TWO", 0x00, "Counting_Rod"),
    c(0x1D374, None, "IDEOGRAPHIC TALLY MARK THREE", 0x00, "Counting_Rod"),
    c(0x1D375, None, "IDEOGRAPHIC TALLY MARK FOUR", 0x00, "Counting_Rod"),
    c(0x1D376, None, "IDEOGRAPHIC TALLY MARK FIVE", 0x00, "Counting_Rod"),
    c(0x1D377, None, "TALLY MARK ONE", 0x00, "Counting_Rod"),
    c(0x1D378, None, "TALLY MARK FIVE", 0x00, "Counting_Rod"),
    c(0x1D400, None, "MATHEMATICAL BOLD CAPITAL A", 0x33, "Math_Alphanum"),
    c(0x1D401, None, "MATHEMATICAL BOLD CAPITAL B", 0x33, "Math_Alphanum"),
    c(0x1D402, None, "MATHEMATICAL BOLD CAPITAL C", 0x33, "Math_Alphanum"),
    c(0x1D403, None, "MATHEMATICAL BOLD CAPITAL D", 0x33, "Math_Alphanum"),
    c(0x1D404, None, "MATHEMATICAL BOLD CAPITAL E", 0x33, "Math_Alphanum"),
    c(0x1D405, None, "MATHEMATICAL BOLD CAPITAL F", 0x33, "Math_Alphanum"),
    c(0x1D406, None, "MATHEMATICAL BOLD CAPITAL G", 0x33, "Math_Alphanum"),
    c(0x1D407, None, "MATHEMATICAL BOLD CAPITAL H", 0x33, "Math_Alphanum"),
    c(0x1D408, None, "MATHEMATICAL BOLD CAPITAL I", 0x33, "Math_Alphanum"),
    c(0x1D409, None, "MATHEMATICAL BOLD CAPITAL J", 0x33, "Math_Alphanum"),
    c(0x1D40A, None, "MATHEMATICAL BOLD CAPITAL K", 0x33, "Math_Alphanum"),
    c(0x1D40B, None, "MATHEMATICAL BOLD CAPITAL L", 0x33, "Math_Alphanum"),
    c(0x1D40C, None, "MATHEMATICAL BOLD CAPITAL M", 0x33, "Math_Alphanum"),
    c(0x1D40D, None, "MATHEMATICAL BOLD CAPITAL N", 0x33, "Math_Alphanum"),
    c(0x1D40E, None, "MATHEMATICAL BOLD CAPITAL O", 0x33, "Math_Alphanum"),
    c(0x1D40F, None, "MATHEMATICAL BOLD CAPITAL P", 0x33, "Math_Alphanum"),
    c(0x1D410, None, "MATHEMATICAL BOLD CAPITAL Q", 0x33, "Math_Alphanum"),
    c(0x1D411, None, "MATHEMATICAL BOLD CAPITAL R", 0x33, "Math_Alphanum"),
    c(0x1D412, None, "MATHEMATICAL BOLD CAPITAL S", 0x33, "Math_Alphanum"),
    c(0x1D413, None, "MATHEMATICAL BOLD CAPITAL T", 0x33, "Math_Alphanum"),
    c(0x1D414, None, "MATHEMATICAL BOLD CAPITAL U", 0x33, "Math_Alphanum"),
    c(0x1D415, None, "MATHEMATICAL BOLD CAPITAL V", 0x33, "Math_Alphanum"),
    c(0x1D416, None, "MATHEMATICAL BOLD CAPITAL W", 0x33, "Math_Alphanum"),
    c(0x1D417, None, "MATHEMATICAL BOLD CAPITAL X", 0x33, "Math_Alphanum"),
    c(0x1D418, None, "MATHEMATICAL BOLD CAPITAL Y", 0x33, "Math_Alphanum"),
    c(0x1D419, None, "MATHEMATICAL BOLD CAPITAL Z", 0x33, "Math_Alphanum"),
    c(0x1D41A, None, "MATHEMATICAL BOLD SMALL A", 0x33, "Math_Alphanum"),
    c(0x1D41B, None, "MATHEMATICAL BOLD SMALL B", 0x33, "Math_Alphanum"),
    c(0x1D41C, None, "MATHEMATICAL BOLD SMALL C", 0x33, "Math_Alphanum"),
    c(0x1D41D, None, "MATHEMATICAL BOLD SMALL D", 0x33, "Math_Alphanum"),
    c(0x1D41E, None, "MATHEMATICAL BOLD SMALL E", 0x33, "Math_Alphanum"),
    c(0x1D41F, None, "MATHEMATICAL BOLD SMALL F", 0x33, "Math_Alphanum"),
    c(0x1D420, None, "MATHEMATICAL BOLD SMALL G", 0x33, "Math_Alphanum"),
    c(0x1D421, None, "MATHEMATICAL BOLD SMALL H", 0x33, "Math_Alphanum"),
    c(0x1D422, None, "MATHEMATICAL BOLD SMALL I", 0x33, "Math_Alphanum"),
    c(0x1D423, None, "MATHEMATICAL BOLD SMALL J", 0x33, "Math_Alphanum"),
    c(0x1D424, None, "MATHEMATICAL BOLD SMALL K", 0x33, "Math_Alphanum"),
    c(0x1D425, None, "MATHEMATICAL BOLD SMALL L", 0x33, "Math_Alphanum"),
    c(0x1D426, None, "MATHEMATICAL BOLD SMALL M", 0x33, "Math_Alphanum"),
    c(0x1D427, None, "MATHEMATICAL BOLD SMALL N", 0x33, "Math_Alphanum"),
    c(0x1D428, None, "MATHEMATICAL BOLD SMALL O", 0x33, "Math_Alphanum"),
    c(0x1D429, None, "MATHEMATICAL BOLD SMALL P", 0x33, "Math_Alphanum"),
    c(0x1D42A, None, "MATHEMATICAL BOLD SMALL Q", 0x33, "Math_Alphanum"),
    c(0x1D42B, None, "MATHEMATICAL BOLD SMALL R", 0x33, "Math_Alphanum"),
    c(0x1D42C, None, "MATHEMATICAL BOLD SMALL S", 0x33, "Math_Alphanum"),
    c(0x1D42D, None, "MATHEMATICAL BOLD SMALL T", 0x33, "Math_Alphanum"),
    c(0x1D42E, None, "MATHEMATICAL BOLD SMALL U", 0x33, "Math_Alphanum"),
    c(0x1D42F, None, "MATHEMATICAL BOLD SMALL V", 0x33, "Math_Alphanum"),
    c(0x1D430, None, "MATHEMATICAL BOLD SMALL W", 0x33, "Math_Alphanum"),
    c(0x1D431, None, "MATHEMATICAL BOLD SMALL X", 0x33, "Math_Alphanum"),
    c(0x1D432, None, "MATHEMATICAL BOLD SMALL Y", 0x33, "Math_Alphanum"),
    c(0x1D433, None, "MATHEMATICAL BOLD SMALL Z", 0x33, "Math_Alphanum"),
    c(0x1D434, None, "MATHEMATICAL ITALIC CAPITAL A", 0x33, "Math_Alphanum"),
    c(0x1D435, None, "MATHEMATICAL ITALIC CAPITAL B", 0x33, "Math_Alphanum"),
    c(0x1D436, None, "MATHEMATICAL ITALIC CAPITAL C", 0x33, "Math_Alphanum"),
    c(0x1D437, None, "MATHEMATICAL ITALIC CAPITAL D", 0x33, "Math_Alphanum"),
    c(0x1D438, None, "MATHEMATICAL ITALIC CAPITAL E", 0x33, "Math_Alphanum"),
    c(0x1D439, None, "MATHEMATICAL ITALIC CAPITAL F", 0x33, "Math_Alphanum"),
    c(0x1D43A, None, "MATHEMATICAL ITALIC CAPITAL G", 0x33, "Math_Alphanum"),
    c(0x1D43B, None, "MATHEMATICAL ITALIC CAPITAL H", 0x33, "Math_Alphanum"),
    c(0x1D43C, None, "MATHEMATICAL ITALIC CAPITAL I", 0x33, "Math_Alphanum"),
    c(0x1D43D, None, "MATHEMATICAL ITALIC CAPITAL J", 0x33, "Math_Alphanum"),
    c(0x1D43E, None, "MATHEMATICAL ITALIC CAPITAL K", 0x33, "Math_Alphanum"),
    c(0x1D43F, None, "MATHEMATICAL ITALIC CAPITAL L", 0x33, "Math_Alphanum"),
    c(0x1D440, None, "MATHEMATICAL ITALIC CAPITAL M", 0x33, "Math_Alphanum"),
    c(0x1D441, None, "MATHEMATICAL ITALIC CAPITAL N", 0x33, "Math_Alphanum"),
    c(0x1D442, None, "MATHEMATICAL ITALIC CAPITAL O", 0x33, "Math_Alphanum"),
    c(0x1D443, None, "MATHEMATICAL ITALIC CAPITAL P", 0x33, "Math_Alphanum"),
    c(0x1D444, None, "MATHEMATICAL ITALIC CAPITAL Q", 0x33, "Math_Alphanum"),
    c(0x1D445, None, "MATHEMATICAL ITALIC CAPITAL R", 0x33, "Math_Alphanum"),
    c(0x1D446, None, "MATHEMATICAL ITALIC CAPITAL S", 0x33, "Math_Alphanum"),
    c(0x1D447, None, "MATHEMATICAL ITALIC CAPITAL T", 0x33, "Math_Alphanum"),
    c(0x1D448, None, "MATHEMATICAL ITALIC CAPITAL U", 0x33, "Math_Alphanum"),
    c(0x1D449, None, "MATHEMATICAL ITALIC CAPITAL V", 0x33, "Math_Alphanum"),
    c(0x1D44A, None, "MATHEMATICAL ITALIC CAPITAL W", 0x33, "Math_Alphanum"),
    c(0x1D44B, None, "MATHEMATICAL ITALIC CAPITAL X", 0x33, "Math_Alphanum"),
    c(0x1D44C, None, "MATHEMATICAL ITALIC CAPITAL Y", 0x33, "Math_Alphanum"),
    c(0x1D44D, None, "MATHEMATICAL ITALIC CAPITAL Z", 0x33, "Math_Alphanum"),
    c(0x1D44E, None, "MATHEMATICAL ITALIC SMALL A", 0x33, "Math_Alphanum"),
    c(0x1D44F, None, "MATHEMATICAL ITALIC SMALL B", 0x33, "Math_Alphanum"),
    c(0x1D450, None, "MATHEMATICAL ITALIC SMALL C", 0x33, "Math_Alphanum"),
    c(0x1D451, None, "MATHEMATICAL ITALIC SMALL D", 0x33, "Math_Alphanum"),
    c(0x1D452, None, "MATHEMATICAL ITALIC SMALL E", 0x33, "Math_Alphanum"),
    c(0x1D453, None, "MATHEMATICAL ITALIC SMALL F", 0x33, "Math_Alphanum"),
    c(0x1D454, None, "MATHEMATICAL ITALIC SMALL G", 0x33, "Math_Alphanum"),
    c(0x1D456, None, "MATHEMATICAL ITALIC SMALL I", 0x33, "Math_Alphanum"),
    c(0x1D457, None, "MATHEMATICAL ITALIC SMALL J", 0x33, "Math_Alphanum"),
    c(0x1D458, None, "MATHEMATICAL ITALIC SMALL K", 0x33, "Math_Alphanum"),
    c(0x1D459, None, "MATHEMATICAL ITALIC SMALL L", 0x33, "Math_Alphanum"),
    c(0x1D45A, None, "MATHEMATICAL ITALIC SMALL M", 0x33, "Math_Alphanum"),
    c(0x1D45B, None, "MATHEMATICAL ITALIC SMALL N", 0x33, "Math_Alphanum"),
    c(0x1D45C, None, "MATHEMATICAL ITALIC SMALL O", 0x33, "Math_Alphanum"),
    c(0x1D45D, None, "MATHEMATICAL ITALIC SMALL P", 0x33, "Math_Alphanum"),
    c(0x1D45E, None, "MATHEMATICAL ITALIC SMALL Q", 0x33, "Math_Alphanum"),
    c(0x1D45F, None, "MATHEMATICAL ITALIC SMALL R", 0x33, "Math_Alphanum"),
    c(0x1D460, None, "MATHEMATICAL ITALIC SMALL S", 0x33, "Math_Alphanum"),
    c(0x1D461, None, "MATHEMATICAL ITALIC SMALL T", 0x33, "Math_Alphanum"),
    c(0x1D462, None, "MATHEMATICAL ITALIC SMALL U", 0x33, "Math_Alphanum"),
    c(0x1D463, None, "MATHEMATICAL ITALIC SMALL V", 0x33, "Math_Alphanum"),
    c(0x1D464, None, "MATHEMATICAL ITALIC SMALL W", 0x33, "Math_Alphanum"),
    c(0x1D465, None, "MATHEMATICAL ITALIC SMALL X", 0x33, "Math_Alphanum"),
    c(0x1D466, None, "MATHEMATICAL ITALIC SMALL Y", 0x33, "Math_Alphanum"),
    c(0x1D467, None, "MATHEMATICAL ITALIC SMALL Z", 0x33, "Math_Alphanum"),
    c(0x1D468, None, "MATHEMATICAL BOLD ITALIC CAPITAL A", 0x33, "Math_Alphanum"),
    c(0x1D469, None, "MATHEMATICAL BOLD ITALIC CAPITAL B", 0x33, "Math_Alphanum"),
    c(0x1D46A, None, "MATHEMATICAL BOLD ITALIC CAPITAL C", 0x33, "Math_Alphanum"),
    c(0x1D46B, None, "MATHEMATICAL BOLD ITALIC CAPITAL D", 0x33, "Math_Alphanum"),
    c(0x1D46C, None, "MATHEMATICAL BOLD ITALIC CAPITAL E", 0x33, "Math_Alphanum"),
    c(0x1D46D, None, "MATHEMATICAL BOLD ITALIC CAPITAL F", 0x33, "Math_Alphanum"),
    c(0x1D46E, None, "MATHEMATICAL BOLD ITALIC CAPITAL G", 0x33, "Math_Alphanum"),
    c(0x1D46F, None, "MATHEMATICAL BOLD ITALIC CAPITAL H", 0x33, "Math_Alphanum"),
    c(0x1D470, None, "MATHEMATICAL BOLD ITALIC CAPITAL I", 0x33, "Math_Alphanum"),
    c(0x1D471, None, "MATHEMATICAL BOLD ITALIC CAPITAL J", 0x33, "Math_Alphanum"),
    c(0x1D472, None, "MATHEMATICAL BOLD ITALIC CAPITAL K", 0x33, "Math_Alphanum"),
    c(0x1D473, None, "MATHEMATICAL BOLD ITALIC CAPITAL L", 0x33, "Math_Alphanum"),
    c(0x1D474, None, "MATHEMATICAL BOLD ITALIC CAPITAL M", 0x33, "Math_Alphanum"),
    c(0x1D475, None, "MATHEMATICAL BOLD ITALIC CAPITAL N", 0x33, "Math_Alphanum"),
    c(0x1D476, None, "MATHEMATICAL BOLD ITALIC CAPITAL O", 0x33, "Math_Alphanum"),
    c(0x1D477, None, "MATHEMATICAL BOLD ITALIC CAPITAL P", 0x33, "Math_Alphanum"),
    c(0x1D478, None, "MATHEMATICAL BOLD ITALIC CAPITAL Q", 0x33, "Math_Alphanum"),
    c(0x1D479, None, "MATHEMATICAL BOLD ITALIC CAPITAL R", 0x33, "Math_Alphanum"),
    c(0x1D47A, None, "MATHEMATICAL BOLD ITALIC CAPITAL S", 0x33, "Math_Alphanum"),
    c(0x1D47B, None, "MATHEMATICAL BOLD ITALIC CAPITAL T", 0x33, "Math_Alphanum"),
    c(0x1D47C, None, "MATHEMATICAL BOLD ITALIC CAPITAL U", 0x33, "Math_Alphanum"),
    c(0x1D47D, None, "MATHEMATICAL BOLD ITALIC CAPITAL V", 0x33, "Math_Alphanum"),
    c(0x1D47E, None, "MATHEMATICAL BOLD ITALIC CAPITAL W", 0x33, "Math_Alphanum"),
    c(0x1D47F, None, "MATHEMATICAL BOLD ITALIC CAPITAL X", 0x33, "Math_Alphanum"),
    c(0x1D480, None, "MATHEMATICAL BOLD ITALIC CAPITAL Y", 0x33, "Math_Alphanum"),
    c(0x1D481, None, "MATHEMATICAL BOLD ITALIC CAPITAL Z", 0x33, "Math_Alphanum"),
    c(0x1D482, None, "MATHEMATICAL BOLD ITALIC SMALL A", 0x33, "Math_Alphanum"),
    c(0x1D483, None, "MATHEMATICAL BOLD ITALIC SMALL B", 0x33, "Math_Alphanum"),
    c(0x1D484, None, "MATHEMATICAL BOLD ITALIC SMALL C", 0x33, "Math_Alphanum"),
    c(0x1D485, None, "MATHEMATICAL BOLD ITALIC SMALL D", 0x33, "Math_Alphanum"),
    c(0x1D486, None, "MATHEMATICAL BOLD ITALIC SMALL E", 0x33, "Math_Alphanum"),
    c(0x1D487, None, "MATHEMATICAL BOLD ITALIC SMALL F", 0x33, "Math_Alphanum"),
    c(0x1D488, None, "MATHEMATICAL BOLD ITALIC SMALL G", 0x33, "Math_Alphanum"),
    c(0x1D489, None, "MATHEMATICAL BOLD ITALIC SMALL H", 0x33, "Math_Alphanum"),
    c(0x1D48A, None, "MATHEMATICAL BOLD ITALIC SMALL I", 0x33, "Math_Alphanum"),
    c(0x1D48B, None, "MATHEMATICAL BOLD ITALIC SMALL J", 0x33, "Math_Alphanum"),
    c(0x1D48C, None, "MATHEMATICAL BOLD ITALIC SMALL K", 0x33, "Math_Alphanum"),
    c(0x1D48D, None, "MATHEMATICAL BOLD ITALIC SMALL L", 0x33, "Math_Alphanum"),
    c(0x1D48E, None, "MATHEMATICAL BOLD ITALIC SMALL M", 0x33, "Math_Alphanum"),
    c(0x1D48F, None, "MATHEMATICAL BOLD ITALIC SMALL N", 0x33, "Math_Alphanum"),
    c(0x1D490, None, "MATHEMATICAL BOLD ITALIC SMALL O", 0x33, "Math_Alphanum"),
    c(0x1D491, None, "MATHEMATICAL BOLD ITALIC SMALL P", 0x33, "Math_Alphanum"),
    c(0x1D492, None, "MATHEMATICAL BOLD ITALIC SMALL Q", 0x33, "Math_Alphanum"),
    c(0x1D493, None, "MATHEMATICAL BOLD ITALIC SMALL R", 0x33, "Math_Alphanum"),
    c(0x1D494, None, "MATHEMATICAL BOLD ITALIC SMALL S", 0x33, "Math_Alphanum"),
    c(0x1D495, None, "MATHEMATICAL BOLD ITALIC SMALL T", 0x33, "Math_Alphanum"),
    c(0x1D496, None, "MATHEMATICAL BOLD ITALIC SMALL U", 0x33, "Math_Alphanum"),
    c(0x1D497, None, "MATHEMATICAL BOLD ITALIC SMALL V", 0x33, "Math_Alphanum"),
    c(0x1D498, None, "MATHEMATICAL BOLD ITALIC SMALL W", 0x33, "Math_Alphanum"),
    c(0x1D499, None, "MATHEMATICAL BOLD ITALIC SMALL X", 0x33, "Math_Alphanum"),
    c(0x1D49A, None, "MATHEMATICAL BOLD ITALIC SMALL Y", 0x33, "Math_Alphanum"),
    c(0x1D49B, None, "MATHEMATICAL BOLD ITALIC SMALL Z", 0x33, "Math_Alphanum"),
    c(0x1D49C, None, "MATHEMATICAL SCRIPT CAPITAL A", 0x33, "Math_Alphanum"),
    c(0x1D49E, None, "MATHEMATICAL SCRIPT CAPITAL C", 0x33, "Math_Alphanum"),
    c(0x1D49F, None, "MATHEMATICAL SCRIPT CAPITAL D", 0x33, "Math_Alphanum"),
    c(0x1D4A2, None, "MATHEMATICAL SCRIPT CAPITAL G", 0x33, "Math_Alphanum"),
    c(0x1D4A5, None, "MATHEMATICAL SCRIPT CAPITAL J", 0x33, "Math_Alphanum"),
    c(0x1D4A6, None, "MATHEMATICAL SCRIPT CAPITAL K", 0x33, "Math_Alphanum"),
    c(0x1D4A9, None, "MATHEMATICAL SCRIPT CAPITAL N", 0x33, "Math_Alphanum"),
    c(0x1D4AA, None, "MATHEMATICAL SCRIPT CAPITAL O", 0x33, "Math_Alphanum"),
    c(0x1D4AB, None, "MATHEMATICAL SCRIPT CAPITAL P", 0x33, "Math_Alphanum"),
    c(0x1D4AC, None, "MATHEMATICAL SCRIPT CAPITAL Q", 0x33, "Math_Alphanum"),
    c(0x1D4AE, None, "MATHEMATICAL SCRIPT CAPITAL S", 0x33, "Math_Alphanum"),
    c(0x1D4AF, None, "MATHEMATICAL SCRIPT CAPITAL T", 0x33, "Math_Alphanum"),
    c(0x1D4B0, None, "MATHEMATICAL SCRIPT CAPITAL U", 0x33, "Math_Alphanum"),
    c(0x1D4B1, None, "MATHEMATICAL SCRIPT CAPITAL V", 0x33, "Math_Alphanum"),
    c(0x1D4B2, None, "MATHEMATICAL SCRIPT CAPITAL W", 0x33, "Math_Alphanum"),
    c(0x1D4B3, None, "MATHEMATICAL SCRIPT CAPITAL X", 0x33, "Math_Alphanum"),
    c(0x1D4B4, None, "MATHEMATICAL SCRIPT CAPITAL Y", 0x33, "Math_Alphanum"),
    c(0x1D4B5, None, "MATHEMATICAL SCRIPT CAPITAL Z", 0x33, "Math_Alphanum"),
    c(0x1D4B6, None, "MATHEMATICAL SCRIPT SMALL A", 0x33, "Math_Alphanum"),
    c(0x1D4B7, None, "MATHEMATICAL SCRIPT SMALL B", 0x33, "Math_Alphanum"),
    c(0x1D4B8, None, "MATHEMATICAL SCRIPT SMALL C", 0x33, "Math_Alphanum"),
    c(0x1D4B9, None, "MATHEMATICAL SCRIPT SMALL D", 0x33, "Math_Alphanum"),
    c(0x1D4BB, None, "MATHEMATICAL SCRIPT SMALL F", 0x33, "Math_Alphanum"),
    c(0x1D4BD, None, "MATHEMATICAL SCRIPT SMALL H", 0x33, "Math_Alphanum"),
    c(0x1D4BE, None, "MATHEMATICAL SCRIPT SMALL I", 0x33, "Math_Alphanum"),
    c(0x1D4BF, None, "MATHEMATICAL SCRIPT SMALL J", 0x33, "Math_Alphanum"),
    c(0x1D4C0, None, "MATHEMATICAL SCRIPT SMALL K", 0x33, "Math_Alphanum"),
    c(0x1D4C1, None, "MATHEMATICAL SCRIPT SMALL L", 0x33, "Math_Alphanum"),
    c(0x1D4C2, None, "MATHEMATICAL SCRIPT SMALL M", 0x33, "Math_Alphanum"),
    c(0x1D4C3, None, "MATHEMATICAL SCRIPT SMALL N", 0x33, "Math_Alphanum"),
    c(0x1D4C5, None, "MATHEMATICAL SCRIPT SMALL P", 0x33, "Math_Alphanum"),
    c(0x1D4C6, None, "MATHEMATICAL SCRIPT SMALL Q", 0x33, "Math_Alphanum"),
    c(0x1D4C7, None, "MATHEMATICAL SCRIPT SMALL R", 0x33, "Math_Alphanum"),
    c(0x1D4C8, None, "MATHEMATICAL SCRIPT SMALL S", 0x33, "Math_Alphanum"),
    c(0x1D4C9, None, "MATHEMATICAL SCRIPT SMALL T", 0x33, "Math_Alphanum"),
    c(0x1D4CA, None, "MATHEMATICAL SCRIPT SMALL U", 0x33, "Math_Alphanum"),
    c(0x1D4CB, None, "MATHEMATICAL SCRIPT SMALL V", 0x33, "Math_Alphanum"),
    c(0x1D4CC, None, "MATHEMATICAL SCRIPT SMALL W", 0x33, "Math_Alphanum"),
    c(0x1D4CD, None, "MATHEMATICAL SCRIPT SMALL X", 0x33, "Math_Alphanum"),
    c(0x1D4CE, None, "MATHEMATICAL SCRIPT SMALL Y", 0x33, "Math_Alphanum"),
    c(0x1D4CF, None, "MATHEMATICAL SCRIPT SMALL Z", 0x33, "Math_Alphanum"),
    c(0x1D4D0, None, "MATHEMATICAL BOLD SCRIPT CAPITAL A", 0x33, "Math_Alphanum"),
    c(0x1D4D1, None, "MATHEMATICAL BOLD SCRIPT CAPITAL B", 0x33, "Math_Alphanum"),
    c(0x1D4D2, None, "MATHEMATICAL BOLD SCRIPT CAPITAL C", 0x33, "Math_Alphanum"),
    c(0x1D4D3, None, "MATHEMATICAL BOLD SCRIPT CAPITAL D", 0x33, "Math_Alphanum"),
    c(0x1D4D4, None, "MATHEMATICAL BOLD SCRIPT CAPITAL E", 0x33, "Math_Alphanum"),
    c(0x1D4D5, None, "MATHEMATICAL BOLD SCRIPT CAPITAL F", 0x33, "Math_Alphanum"),
    c(0x1D4D6, None, "MATHEMATICAL BOLD SCRIPT CAPITAL G", 0x33, "Math_Alphanum"),
    c(0x1D4D7, None, "MATHEMATICAL BOLD SCRIPT CAPITAL H", 0x33, "Math_Alphanum"),
    c(0x1D4D8, None, "MATHEMATICAL BOLD SCRIPT CAPITAL I", 0x33, "Math_Alphanum"),
    c(0x1D4D9, None, "MATHEMATICAL BOLD SCRIPT CAPITAL J", 0x33, "Math_Alphanum"),
    c(0x1D4DA, None, "MATHEMATICAL BOLD SCRIPT CAPITAL K", 0x33, "Math_Alphanum"),
    c(0x1D4DB, None, "MATHEMATICAL BOLD SCRIPT CAPITAL L", 0x33, "Math_Alphanum"),
    c(0x1D4DC, None, "MATHEMATICAL BOLD SCRIPT CAPITAL M", 0x33, "Math_Alphanum"),
    c(0x1D4DD, None, "MATHEMATICAL BOLD SCRIPT CAPITAL N", 0x33, "Math_Alphanum"),
    c(0x1D4DE, None, "MATHEMATICAL BOLD SCRIPT CAPITAL O", 0x33, "Math_Alphanum"),
    c(0x1D4DF, None, "MATHEMATICAL BOLD SCRIPT CAPITAL P", 0x33, "Math_Alphanum"),
    c(0x1D4E0, None, "MATHEMATICAL BOLD SCRIPT CAPITAL Q", 0x33, "Math_Alphanum"),
    c(0x1D4E1, None, "MATHEMATICAL BOLD SCRIPT CAPITAL R", 0x33, "Math_Alphanum"),
    c(0x1D4E2, None, "MATHEMATICAL BOLD SCRIPT CAPITAL S", 0x33, "Math_Alphanum"),
    c(0x1D4E3, None, "MATHEMATICAL BOLD SCRIPT CAPITAL T", 0x33, "Math_Alphanum"),
    c(0x1D4E4, None, "MATHEMATICAL BOLD SCRIPT CAPITAL U", 0x33, "Math_Alphanum"),
    c(0x1D4E5, None, "MATHEMATICAL BOLD SCRIPT CAPITAL V", 0x33, "Math_Alphanum"),
    c(0x1D4E6, None, "MATHEMATICAL BOLD SCRIPT CAPITAL W", 0x33, "Math_Alphanum"),
    c(0x1D4E7, None, "MATHEMATICAL BOLD SCRIPT CAPITAL X", 0x33, "Math_Alphanum"),
    c(0x1D4E8, None, "MATHEMATICAL BOLD SCRIPT CAPITAL Y", 0x33, "Math_Alphanum"),
    c(0x1D4E9, None, "MATHEMATICAL BOLD SCRIPT CAPITAL Z", 0x33, "Math_Alphanum"),
    c(0x1D4EA, None, "MATHEMATICAL BOLD SCRIPT SMALL A", 0x33, "Math_Alphanum"),
    c(0x1D4EB, None, "MATHEMATICAL BOLD SCRIPT SMALL B", 0x33, "Math_Alphanum"),
    c(0x1D4EC, None, "MATHEMATICAL BOLD SCRIPT SMALL C", 0x33, "Math_Alphanum"),
    c(0x1D4ED, None, "MATHEMATICAL BOLD SCRIPT SMALL D", 0x33, "Math_Alphanum"),
    c(0x1D4EE, None, "MATHEMATICAL BOLD SCRIPT SMALL E", 0x33, "Math_Alphanum"),
    c(0x1D4EF, None, "MATHEMATICAL BOLD SCRIPT SMALL F", 0x33, "Math_Alphanum"),
    c(0x1D4F0, None, "MATHEMATICAL BOLD SCRIPT SMALL G", 0x33, "Math_Alphanum"),
    c(0x1D4F1, None, "MATHEMATICAL BOLD SCRIPT SMALL H", 0x33, "Math_Alphanum"),
    c(0x1D4F2, None, "MATHEMATICAL BOLD SCRIPT SMALL I", 0x33, "Math_Alphanum"),
    c(0x1D4F3, None, "MATHEMATICAL BOLD SCRIPT SMALL J", 0x33, "Math_Alphanum"),
    c(0x1D4F4, None, "MATHEMATICAL BOLD SCRIPT SMALL K", 0x33, "Math_Alphanum"),
    c(0x1D4F5, None, "MATHEMATICAL BOLD SCRIPT SMALL L", 0x33, "Math_Alphanum"),
    c(0x1D4F6, None, "MATHEMATICAL BOLD SCRIPT SMALL M", 0x33, "Math_Alphanum"),
    c(0x1D4F7, None, "MATHEMATICAL BOLD SCRIPT SMALL N", 0x33, "Math_Alphanum"),
    c(0x1D4F8, None, "MATHEMATICAL BOLD SCRIPT SMALL O", 0x33, "Math_Alphanum"),
    c(0x1D4F9, None, "MATHEMATICAL BOLD SCRIPT SMALL P", 0x33, "Math_Alphanum"),
    c(0x1D4FA, None, "MATHEMATICAL BOLD SCRIPT SMALL Q", 0x33, "Math_Alphanum"),
    c(0x1D4FB, None, "MATHEMATICAL BOLD SCRIPT SMALL R", 0x33, "Math_Alphanum"),
    c(0x1D4FC, None, "MATHEMATICAL BOLD SCRIPT SMALL S", 0x33, "Math_Alphanum"),
    c(0x1D4FD, None, "MATHEMATICAL BOLD SCRIPT SMALL T", 0x33, "Math_Alphanum"),
    c(0x1D4FE, None, "MATHEMATICAL BOLD SCRIPT SMALL U", 0x33, "Math_Alphanum"),
    c(0x1D4FF, None, "MATHEMATICAL BOLD SCRIPT SMALL V", 0x33, "Math_Alphanum"),
    c(0x1D500, None, "MATHEMATICAL BOLD SCRIPT SMALL W", 0x33, "Math_Alphanum"),
    c(0x1D501, None, "MATHEMATICAL BOLD SCRIPT SMALL X", 0x33, "Math_Alphanum"),
    c(0x1D502, None, "MATHEMATICAL BOLD SCRIPT SMALL Y", 0x33, "Math_Alphanum"),
    c(0x1D503, None, "MATHEMATICAL BOLD SCRIPT SMALL Z", 0x33, "Math_Alphanum"),
    c(0x1D504, None, "MATHEMATICAL FRAKTUR CAPITAL A", 0x33, "Math_Alphanum"),
    c(0x1D505, None, "MATHEMATICAL FRAKTUR CAPITAL B", 0x33, "Math_Alphanum"),
    c(0x1D507, None, "MATHEMATICAL FRAKTUR CAPITAL D", 0x33, "Math_Alphanum"),
    c(0x1D508, None, "MATHEMATICAL FRAKTUR CAPITAL E", 0x33, "Math_Alphanum"),
    c(0x1D509, None, "MATHEMATICAL FRAKTUR CAPITAL F", 0x33, "Math_Alphanum"),
    c(0x1D50A, None, "MATHEMATICAL FRAKTUR CAPITAL G", 0x33, "Math_Alphanum"),
    c(0x1D50D, None, "MATHEMATICAL FRAKTUR CAPITAL J", 0x33, "Math_Alphanum"),
    c(0x1D50E, None, "MATHEMATICAL FRAKTUR CAPITAL K", 0x33, "Math_Alphanum"),
    c(0x1D50F, None, "MATHEMATICAL FRAKTUR CAPITAL L", 0x33, "Math_Alphanum"),
    c(0x1D510, None, "MATHEMATICAL FRAKTUR CAPITAL M", 0x33, "Math_Alphanum"),
    c(0x1D511, None, "MATHEMATICAL FRAKTUR CAPITAL N", 0x33, "Math_Alphanum"),
    c(0x1D512, None, "MATHEMATICAL FRAKTUR CAPITAL O", 0x33, "Math_Alphanum"),
    c(0x1D513, None, "MATHEMATICAL FRAKTUR CAPITAL P", 0x33, "Math_Alphanum"),
    c(0x1D514, None, "MATHEMATICAL FRAKTUR CAPITAL Q", 0x33, "Math_Alphanum"),
    c(0x1D516, None, "MATHEMATICAL FRAKTUR CAPITAL S", 0x33, "Math_Alphanum"),
    c(0x1D517, None, "MATHEMATICAL FRAKTUR CAPITAL T", 0x33, "Math_Alphanum"),
    c(0x1D518, None, "MATHEMATICAL FRAKTUR CAPITAL U", 0x33, "Math_Alphanum"),
    c(0x1D519, None, "MATHEMATICAL FRAKTUR CAPITAL V", 0x33, "Math_Alphanum"),
    c(0x1D51A, None, "MATHEMATICAL FRAKTUR CAPITAL W", 0x33, "Math_Alphanum"),
    c(0x1D51B, None, "MATHEMATICAL FRAKTUR CAPITAL X", 0x33, "Math_Alphanum"),
    c(0x1D51C, None, "MATHEMATICAL FRAKTUR CAPITAL Y", 0x33, "Math_Alphanum"),
    c(0x1D51E, None, "MATHEMATICAL FRAKTUR SMALL A", 0x33, "Math_Alphanum"),
    c(0x1D51F, None, "MATHEMATICAL FRAKTUR SMALL B", 0x33, "Math_Alphanum"),
    c(0x1D520, None, "MATHEMATICAL FRAKTUR SMALL C", 0x33, "Math_Alphanum"),
    c(0x1D521, None, "MATHEMATICAL FRAKTUR SMALL D", 0x33, "Math_Alphanum"),
    c(0x1D522, None, "MATHEMATICAL FRAKTUR SMALL E", 0x33, "Math_Alphanum"),
    c(0x1D523, None, "MATHEMATICAL FRAKTUR SMALL F", 0x33, "Math_Alphanum"),
    c(0x1D524, None, "MATHEMATICAL FRAKTUR SMALL G", 0x33, "Math_Alphanum"),
    c(0x1D525, None, "MATHEMATICAL FRAKTUR SMALL H", 0x33, "Math_Alphanum"),
    c(0x1D526, None, "MATHEMATICAL FRAKTUR SMALL I", 0x33, "Math_Alphanum"),
    c(0x1D527, None, "MATHEMATICAL FRAKTUR SMALL J", 0x33, "Math_Alphanum"),
    c(0x1D528, None, "MATHEMATICAL FRAKTUR SMALL K", 0x33, "Math_Alphanum"),
    c(0x1D529, None, "MATHEMATICAL FRAKTUR SMALL L", 0x33, "Math_Alphanum"),
    c(0x1D52A, None, "MATHEMATICAL FRAKTUR SMALL M", 0x33, "Math_Alphanum"),
    c(0x1D52B, None, "MATHEMATICAL FRAKTUR SMALL N", 0x33, "Math_Alphanum"),
    c(0x1D52C, None, "MATHEMATICAL FRAKTUR SMALL O", 0x33, "Math_Alphanum"),
    c(0x1D52D, None, "MATHEMATICAL FRAKTUR SMALL P", 0x33, "Math_Alphanum"),
    c(0x1D52E, None, "MATHEMATICAL FRAKTUR SMALL Q", 0x33, "Math_Alphanum"),
    c(0x1D52F, None, "MATHEMATICAL FRAKTUR SMALL R", 0x33, "Math_Alphanum"),
    c(0x1D530, None, "MATHEMATICAL FRAKTUR SMALL S", 0x33, "Math_Alphanum"),
    c(0x1D531, None, "MATHEMATICAL FRAKTUR SMALL T", 0x33, "Math_Alphanum"),
    c(0x1D532, None, "MATHEMATICAL FRAKTUR SMALL U", 0x33, "Math_Alphanum"),
    c(0x1D533, None, "MATHEMATICAL FRAKTUR SMALL V", 0x33, "Math_Alphanum"),
    c(0x1D534, None, "MATHEMATICAL FRAKTUR SMALL W", 0x33, "Math_Alphanum"),
    c(0x1D535, None, "MATHEMATICAL FRAKTUR SMALL X", 0x33, "Math_Alphanum"),
    c(0x1D536, None, "MATHEMATICAL FRAKTUR SMALL Y", 0x33, "Math_Alphanum"),
    c(0x1D537, None, "MATHEMATICAL FRAKTUR SMALL Z", 0x33, "Math_Alphanum"),
    c(0x1D538, None, "MATHEMATICAL DOUBLE-STRUCK CAPITAL A", 0x33, "Math_Alphanum"),
    c(0x1D539, None, "MATHEMATICAL DOUBLE-STRUCK CAPITAL B", 0x33, "Math_Alphanum"),
    c(0x1D53B, None, "MATHEMATICAL DOUBLE-STRUCK CAPITAL D", 0x33, "Math_Alphanum"),
    c(0x1D53C, None, "MATHEMATICAL DOUBLE-STRUCK CAPITAL E", 0x33, "Math_Alphanum"),
    c(0x1D53D, None, "MATHEMATICAL DOUBLE-STRUCK CAPITAL F", 0x33, "Math_Alphanum"),
    c(0x1D53E, None, "MATHEMATICAL DOUBLE-STRUCK CAPITAL G", 0x33, "Math_Alphanum"),
    c(0x1D540, None, "MATHEMATICAL DOUBLE-STRUCK CAPITAL I", 0x33, "Math_Alphanum"),
    c(0x1D541, None, "MATHEMATICAL DOUBLE-STRUCK CAPITAL J", 0x33, "Math_Alphanum"),
    c(0x1D542, None, "MATHEMATICAL DOUBLE-STRUCK CAPITAL K", 0x33, "Math_Alphanum"),
    c(0x1D543, None, "MATHEMATICAL DOUBLE-STRUCK CAPITAL L", 0x33, "Math_Alphanum"),
    c(0x1D544, None, "MATHEMATICAL DOUBLE-STRUCK CAPITAL M", 0x33, "Math_Alphanum"),
    c(0x1D546, None, "MATHEMATICAL DOUBLE-STRUCK CAPITAL O", 0x33, "Math_Alphanum"),
    c(0x1D54A, None, "MATHEMATICAL DOUBLE-STRUCK CAPITAL S", 0x33, "Math_Alphanum"),
    c(0x1D54B, None, "MATHEMATICAL DOUBLE-STRUCK CAPITAL T", 0x33, "Math_Alphanum"),
    c(0x1D54C, None, "MATHEMATICAL DOUBLE-STRUCK CAPITAL U", 0x33, "Math_Alphanum"),
    c(0x1D54D, None, "MATHEMATICAL DOUBLE-STRUCK CAPITAL V", 0x33, "Math_Alphanum"),
    c(0x1D54E, None, "MATHEMATICAL DOUBLE-STRUCK CAPITAL W", 0x33, "Math_Alphanum"),
    c(0x1D54F, None, "MATHEMATICAL DOUBLE-STRUCK CAPITAL X", 0x33, "Math_Alphanum"),
    c(0x1D550, None, "MATHEMATICAL DOUBLE-STRUCK CAPITAL Y", 0x33, "Math_Alphanum"),
    c(0x1D552, None, "MATHEMATICAL DOUBLE-STRUCK SMALL A", 0x33, "Math_Alphanum"),
    c(0x1D553, None, "MATHEMATICAL DOUBLE-STRUCK SMALL B", 0x33, "Math_Alphanum"),
    c(0x1D554, None, "MATHEMATICAL DOUBLE-STRUCK SMALL C", 0x33, "Math_Alphanum"),
    c(0x1D555, None, "MATHEMATICAL DOUBLE-STRUCK SMALL D", 0x33, "Math_Alphanum"),
    c(0x1D556, None, "MATHEMATICAL DOUBLE-STRUCK SMALL E", 0x33, "Math_Alphanum"),
    c(0x1D557, None, "MATHEMATICAL DOUBLE-STRUCK SMALL F", 0x33, "Math_Alphanum"),
    c(0x1D558, None, "MATHEMATICAL DOUBLE-STRUCK SMALL G", 0x33, "Math_Alphanum"),
    c(0x1D559, None, "MATHEMATICAL DOUBLE-STRUCK SMALL H", 0x33, "Math_Alphanum"),
    c(0x1D55A, None, "MATHEMATICAL DOUBLE-STRUCK SMALL I", 0x33, "Math_Alphanum"),
    c(0x1D55B, None, "MATHEMATICAL DOUBLE-STRUCK SMALL J", 0x33, "Math_Alphanum"),
    c(0x1D55C, None, "MATHEMATICAL DOUBLE-STRUCK SMALL K", 0x33, "Math_Alphanum"),
    c(0x1D55D, None, "MATHEMATICAL DOUBLE-STRUCK SMALL L", 0x33, "Math_Alphanum"),
    c(0x1D55E, None, "MATHEMATICAL DOUBLE-STRUCK SMALL M", 0x33, "Math_Alphanum"),
    c(0x1D55F, None, "MATHEMATICAL DOUBLE-STRUCK SMALL N", 0x33, "Math_Alphanum"),
    c(0x1D560, None, "MATHEMATICAL DOUBLE-STRUCK SMALL O", 0x33, "Math_Alphanum"),
    c(0x1D561, None, "MATHEMATICAL DOUBLE-STRUCK SMALL P", 0x33, "Math_Alphanum"),
    c(0x1D562, None, "MATHEMATICAL DOUBLE-STRUCK SMALL Q", 0x33, "Math_Alphanum"),
    c(0x1D563, None, "MATHEMATICAL DOUBLE-STRUCK SMALL R", 0x33, "Math_Alphanum"),
    c(0x1D564, None, "MATHEMATICAL DOUBLE-STRUCK SMALL S", 0x33, "Math_Alphanum"),
    c(0x1D565, None, "MATHEMATICAL DOUBLE-STRUCK SMALL T", 0x33, "Math_Alphanum"),
    c(0x1D566, None, "MATHEMATICAL DOUBLE-STRUCK SMALL U", 0x33, "Math_Alphanum"),
    c(0x1D567, None, "MATHEMATICAL DOUBLE-STRUCK SMALL V", 0x33, "Math_Alphanum"),
    c(0x1D568, None, "MATHEMATICAL DOUBLE-STRUCK SMALL W", 0x33, "Math_Alphanum"),
    c(0x1D569, None, "MATHEMATICAL DOUBLE-STRUCK SMALL X", 0x33, "Math_Alphanum"),
    c(0x1D56A, None, "MATHEMATICAL DOUBLE-STRUCK SMALL Y", 0x33, "Math_Alphanum"),
    c(0x1D56B, None, "MATHEMATICAL DOUBLE-STRUCK SMALL Z", 0x33, "Math_Alphanum"),
    c(0x1D56C, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL A", 0x33, "Math_Alphanum"),
    c(0x1D56D, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL B", 0x33, "Math_Alphanum"),
    c(0x1D56E, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL C", 0x33, "Math_Alphanum"),
    c(0x1D56F, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL D", 0x33, "Math_Alphanum"),
    c(0x1D570, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL E", 0x33, "Math_Alphanum"),
    c(0x1D571, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL F", 0x33, "Math_Alphanum"),
    c(0x1D572, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL G", 0x33, "Math_Alphanum"),
    c(0x1D573, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL H", 0x33, "Math_Alphanum"),
    c(0x1D574, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL I", 0x33, "Math_Alphanum"),
    c(0x1D575, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL J", 0x33, "Math_Alphanum"),
    c(0x1D576, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL K", 0x33, "Math_Alphanum"),
    c(0x1D577, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL L", 0x33, "Math_Alphanum"),
    c(0x1D578, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL M", 0x33, "Math_Alphanum"),
    c(0x1D579, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL N", 0x33, "Math_Alphanum"),
    c(0x1D57A, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL O", 0x33, "Math_Alphanum"),
    c(0x1D57B, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL P", 0x33, "Math_Alphanum"),
    c(0x1D57C, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL Q", 0x33, "Math_Alphanum"),
    c(0x1D57D, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL R", 0x33, "Math_Alphanum"),
    c(0x1D57E, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL S", 0x33, "Math_Alphanum"),
    c(0x1D57F, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL T", 0x33, "Math_Alphanum"),
    c(0x1D580, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL U", 0x33, "Math_Alphanum"),
    c(0x1D581, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL V", 0x33, "Math_Alphanum"),
    c(0x1D582, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL W", 0x33, "Math_Alphanum"),
    c(0x1D583, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL X", 0x33, "Math_Alphanum"),
    c(0x1D584, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL Y", 0x33, "Math_Alphanum"),
    c(0x1D585, None, "MATHEMATICAL BOLD FRAKTUR CAPITAL Z", 0x33, "Math_Alphanum"),
    c(0x1D586, None, "MATHEMATICAL BOLD FRAKTUR SMALL A", 0x33, "Math_Alphanum"),
    c(0x1D587, None, "MATHEMATICAL BOLD FRAKTUR SMALL B", 0x33, "Math_Alphanum"),
    c(0x1D588, None, "MATHEMATICAL BOLD FRAKTUR SMALL C", 0x33, "Math_Alphanum"),
    c(0x1D589, None, "MATHEMATICAL BOLD FRAKTUR SMALL D", 0x33, "Math_Alphanum"),
    c(0x1D58A, None, "MATHEMATICAL BOLD FRAKTUR SMALL E", 0x33, "Math_Alphanum"),
    c(0x1D58B, None, "MATHEMATICAL BOLD FRAKTUR SMALL F", 0x33, "Math_Alphanum"),
    c(0x1D58C, None, "MATHEMATICAL BOLD FRAKTUR SMALL G", 0x33, "Math_Alphanum"),
    c(0x1D58D, None, "MATHEMATICAL BOLD FRAKTUR SMALL H", 0x33, "Math_Alphanum"),
    c(0x1D58E, None, "MATHEMATICAL BOLD FRAKTUR SMALL I", 0x33, "Math_Alphanum"),
    c(0x1D58F, None, "MATHEMATICAL BOLD FRAKTUR SMALL J", 0x33, "Math_Alphanum"),
    c(0x1D590, None, "MATHEMATICAL BOLD FRAKTUR SMALL K", 0x33, "Math_Alphanum"),
    c(0x1D591, None, "MATHEMATICAL BOLD FRAKTUR SMALL L", 0x33, "Math_Alphanum"),
    c(0x1D592, None, "MATHEMATICAL BOLD FRAKTUR SMALL M", 0x33, "Math_Alphanum"),
    c(0x1D593, None, "MATHEMATICAL BOLD FRAKTUR SMALL N", 0x33, "Math_Alphanum"),
    c(0x1D594, None, "MATHEMATICAL BOLD FRAKTUR SMALL O", 0x33, "Math_Alphanum"),
    c(0x1D595, None, "MATHEMATICAL BOLD FRAKTUR SMALL P", 0x33, "Math_Alphanum"),
    c(0x1D596, None, "MATHEMATICAL BOLD FRAKTUR SMALL Q", 0x33, "Math_Alphanum"),
    c(0x1D597, None, "MATHEMATICAL BOLD FRAKTUR SMALL R", 0x33, "Math_Alphanum"),
    c(0x1D598, None, "MATHEMATICAL BOLD FRAKTUR SMALL S", 0x33, "Math_Alphanum"),
    c(0x1D599, None, "MATHEMATICAL BOLD FRAKTUR SMALL T", 0x33, "Math_Alphanum"),
    c(0x1D59A, None, "MATHEMATICAL BOLD FRAKTUR SMALL U", 0x33, "Math_Alphanum"),
    c(0x1D59B, None, "MATHEMATICAL BOLD FRAKTUR SMALL V", 0x33, "Math_Alphanum"),
    c(0x1D59C, None, "MATHEMATICAL BOLD FRAKTUR SMALL W", 0x33, "Math_Alphanum"),
    c(0x1D59D, None, "MATHEMATICAL BOLD FRAKTUR SMALL X", 0x33, "Math_Alphanum"),
    c(0x1D59E, None, "MATHEMATICAL BOLD FRAKTUR SMALL Y", 0x33, "Math_Alphanum"),
    c(0x1D59F, None, "MATHEMATICAL BOLD FRAKTUR SMALL Z", 0x33, "Math_Alphanum"),
    c(0x1D5A0, None, "MATHEMATICAL SANS-SERIF CAPITAL A", 0x33, "Math_Alphanum"),
    c(0x1D5A1, None, "MATHEMATICAL SANS-SERIF CAPITAL B", 0x33, "Math_Alphanum"),
    c(0x1D5A2, None, "MATHEMATICAL SANS-SERIF CAPITAL C", 0x33, "Math_Alphanum"),
    c(0x1D5A3, None, "MATHEMATICAL SANS-SERIF CAPITAL D", 0x33, "Math_Alphanum"),
    c(0x1D5A4, None, "MATHEMATICAL SANS-SERIF CAPITAL E", 0x33, "Math_Alphanum"),
    c(0x1D5A5, None, "MATHEMATICAL SANS-SERIF CAPITAL F", 0x33, "Math_Alphanum"),
    c(0x1D5A6, None, "MATHEMATICAL SANS-SERIF CAPITAL G", 0x33, "Math_Alphanum"),
    c(0x1D5A7, None, "MATHEMATICAL SANS-SERIF CAPITAL H", 0x33, "Math_Alphanum"),
    c(0x1D5A8, None, "MATHEMATICAL SANS-SERIF CAPITAL I", 0x33, "Math_Alphanum"),
    c(0x1D5A9, None, "MATHEMATICAL SANS-SERIF CAPITAL J", 0x33, "Math_Alphanum"),
    c(0x1D5AA, None, "MATHEMATICAL SANS-SERIF CAPITAL K", 0x33, "Math_Alphanum"),
    c(0x1D5AB, None, "MATHEMATICAL SANS-SERIF CAPITAL L", 0x33, "Math_Alphanum"),
    c(0x1D5AC, None, "MATHEMATICAL SANS-SERIF CAPITAL M", 0x33, "Math_Alphanum"),
    c(0x1D5AD, None, "MATHEMATICAL SANS-SERIF CAPITAL N", 0x33, "Math_Alphanum"),
    c(0x1D5AE, None, "MATHEMATICAL SANS-SERIF CAPITAL O", 0x33, "Math_Alphanum"),
    c(0x1D5AF, None, "MATHEMATICAL SANS-SERIF CAPITAL P", 0x33, "Math_Alphanum"),
    c(0x1D5B0, None, "MATHEMATICAL SANS-SERIF CAPITAL Q", 0x33, "Math_Alphanum"),
    c(0x1D5B1, None, "MATHEMATICAL SANS-SERIF CAPITAL R", 0x33, "Math_Alphanum"),
    c(0x1D5B2, None, "MATHEMATICAL SANS-SERIF CAPITAL S", 0x33, "Math_Alphanum"),
    c(0x1D5B3, None, "MATHEMATICAL SANS-SERIF CAPITAL T", 0x33, "Math_Alphanum"),
    c(0x1D5B4, None, "MATHEMATICAL SANS-SERIF CAPITAL U", 0x33, "Math_Alphanum"),
    c(0x1D5B5, None, "MATHEMATICAL SANS-SERIF CAPITAL V", 0x33, "Math_Alphanum"),
    c(0x1D5B6, None, "MATHEMATICAL SANS-SERIF CAPITAL W", 0x33, "Math_Alphanum"),
    c(0x1D5B7, None, "MATHEMATICAL SANS-SERIF CAPITAL X", 0x33, "Math_Alphanum"),
    c(0x1D5B8, None, "MATHEMATICAL SANS-SERIF CAPITAL Y", 0x33, "Math_Alphanum"),
    c(0x1D5B9, None, "MATHEMATICAL SANS-SERIF CAPITAL Z", 0x33, "Math_Alphanum"),
    c(0x1D5BA, None, "MATHEMATICAL SANS-SERIF SMALL A", 0x33, "Math_Alphanum"),
    c(0x1D5BB, None, "MATHEMATICAL SANS-SERIF SMALL B", 0x33, "Math_Alphanum"),
    c(0x1D5BC, None, "MATHEMATICAL SANS-SERIF SMALL C", 0x33, "Math_Alphanum"),
    c(0x1D5BD, None, "MATHEMATICAL SANS-SERIF SMALL D", 0x33, "Math_Alphanum"),
    c(0x1D5BE, None, "MATHEMATICAL SANS-SERIF SMALL E", 0x33, "Math_Alphanum"),
    c(0x1D5BF, None, "MATHEMATICAL SANS-SERIF SMALL F", 0x33, "Math_Alphanum"),
    c(0x1D5C0, None, "MATHEMATICAL SANS-SERIF SMALL G", 0x33, "Math_Alphanum"),
    c(0x1D5C1, None, "MATHEMATICAL SANS-SERIF SMALL H", 0x33, "Math_Alphanum"),
    c(0x1D5C2, None, "MATHEMATICAL SANS-SERIF SMALL I", 0x33, "Math_Alphanum"),
    c(0x1D5C3, None, "MATHEMATICAL SANS-SERIF SMALL J", 0x33, "Math_Alphanum"),
    c(0x1D5C4, None, "MATHEMATICAL SANS-SERIF SMALL K", 0x33, "Math_Alphanum"),
    c(0x1D5C5, None, "MATHEMATICAL SANS-SERIF SMALL L", 0x33, "Math_Alphanum"),
    c(0x1D5C6, None, "MATHEMATICAL SANS-SERIF SMALL M", 0x33, "Math_Alphanum"),
    c(0x1D5C7, None, "MATHEMATICAL SANS-SERIF SMALL N", 0x33, "Math_Alphanum"),
    c(0x1D5C8, None, "MATHEMATICAL SANS-SERIF SMALL O", 0x33, "Math_Alphanum"),
    c(0x1D5C9, None, "MATHEMATICAL SANS-SERIF SMALL P", 0x33, "Math_Alphanum"),
    c(0x1D5CA, None, "MATHEMATICAL SANS-SERIF SMALL Q", 0x33, "Math_Alphanum"),
    c(0x1D5CB, None, "MATHEMATICAL SANS-SERIF SMALL R", 0x33, "Math_Alphanum"),
    c(0x1D5CC, None, "MATHEMATICAL SANS-SERIF SMALL S", 0x33, "Math_Alphanum"),
    c(0x1D5CD, None, "MATHEMATICAL SANS-SERIF SMALL T", 0x33, "Math_Alphanum"),
    c(0x1D5CE, None, "MATHEMATICAL SANS-SERIF SMALL U", 0x33, "Math_Alphanum"),
    c(0x1D5CF, None, "MATHEMATICAL SANS-SERIF SMALL V", 0x33, "Math_Alphanum"),
    c(0x1D5D0, None, "MATHEMATICAL SANS-SERIF SMALL W", 0x33, "Math_Alphanum"),
    c(0x1D5D1, None, "MATHEMATICAL SANS-SERIF SMALL X", 0x33, "Math_Alphanum"),
    c(0x1D5D2, None, "MATHEMATICAL SANS-SERIF SMALL Y", 0x33, "Math_Alphanum"),
    c(0x1D5D3, None, "MATHEMATICAL SANS-SERIF SMALL Z", 0x33, "Math_Alphanum"),
    c(0x1D5D4, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL A", 0x33, "Math_Alphanum"),
    c(0x1D5D5, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL B", 0x33, "Math_Alphanum"),
    c(0x1D5D6, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL C", 0x33, "Math_Alphanum"),
    c(0x1D5D7, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL D", 0x33, "Math_Alphanum"),
    c(0x1D5D8, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL E", 0x33, "Math_Alphanum"),
    c(0x1D5D9, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL F", 0x33, "Math_Alphanum"),
    c(0x1D5DA, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL G", 0x33, "Math_Alphanum"),
    c(0x1D5DB, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL H", 0x33, "Math_Alphanum"),
    c(0x1D5DC, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL I", 0x33, "Math_Alphanum"),
    c(0x1D5DD, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL J", 0x33, "Math_Alphanum"),
    c(0x1D5DE, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL K", 0x33, "Math_Alphanum"),
    c(0x1D5DF, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL L", 0x33, "Math_Alphanum"),
    c(0x1D5E0, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL M", 0x33, "Math_Alphanum"),
    c(0x1D5E1, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL N", 0x33, "Math_Alphanum"),
    c(0x1D5E2, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL O", 0x33, "Math_Alphanum"),
    c(0x1D5E3, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL P", 0x33, "Math_Alphanum"),
    c(0x1D5E4, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL Q", 0x33, "Math_Alphanum"),
    c(0x1D5E5, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL R", 0x33, "Math_Alphanum"),
    c(0x1D5E6, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL S", 0x33, "Math_Alphanum"),
    c(0x1D5E7, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL T", 0x33, "Math_Alphanum"),
    c(0x1D5E8, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL U", 0x33, "Math_Alphanum"),
    c(0x1D5E9, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL V", 0x33, "Math_Alphanum"),
    c(0x1D5EA, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL W", 0x33, "Math_Alphanum"),
    c(0x1D5EB, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL X", 0x33, "Math_Alphanum"),
    c(0x1D5EC, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL Y", 0x33, "Math_Alphanum"),
    c(0x1D5ED, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL Z", 0x33, "Math_Alphanum"),
    c(0x1D5EE, None, "MATHEMATICAL SANS-SERIF BOLD SMALL A", 0x33, "Math_Alphanum"),
    c(0x1D5EF, None, "MATHEMATICAL SANS-SERIF BOLD SMALL B", 0x33, "Math_Alphanum"),
    c(0x1D5F0, None, "MATHEMATICAL SANS-SERIF BOLD SMALL C", 0x33, "Math_Alphanum"),
    c(0x1D5F1, None, "MATHEMATICAL SANS-SERIF BOLD SMALL D", 0x33, "Math_Alphanum"),
    c(0x1D5F2, None, "MATHEMATICAL SANS-SERIF BOLD SMALL E", 0x33, "Math_Alphanum"),
    c(0x1D5F3, None, "MATHEMATICAL SANS-SERIF BOLD SMALL F", 0x33, "Math_Alphanum"),
    c(0x1D5F4, None, "MATHEMATICAL SANS-SERIF BOLD SMALL G", 0x33, "Math_Alphanum"),
    c(0x1D5F5, None, "MATHEMATICAL SANS-SERIF BOLD SMALL H", 0x33, "Math_Alphanum"),
    c(0x1D5F6, None, "MATHEMATICAL SANS-SERIF BOLD SMALL I", 0x33, "Math_Alphanum"),
    c(0x1D5F7, None, "MATHEMATICAL SANS-SERIF BOLD SMALL J", 0x33, "Math_Alphanum"),
    c(0x1D5F8, None, "MATHEMATICAL SANS-SERIF BOLD SMALL K", 0x33, "Math_Alphanum"),
    c(0x1D5F9, None, "MATHEMATICAL SANS-SERIF BOLD SMALL L", 0x33, "Math_Alphanum"),
    c(0x1D5FA, None, "MATHEMATICAL SANS-SERIF BOLD SMALL M", 0x33, "Math_Alphanum"),
    c(0x1D5FB, None, "MATHEMATICAL SANS-SERIF BOLD SMALL N", 0x33, "Math_Alphanum"),
    c(0x1D5FC, None, "MATHEMATICAL SANS-SERIF BOLD SMALL O", 0x33, "Math_Alphanum"),
    c(0x1D5FD, None, "MATHEMATICAL SANS-SERIF BOLD SMALL P", 0x33, "Math_Alphanum"),
    c(0x1D5FE, None, "MATHEMATICAL SANS-SERIF BOLD SMALL Q", 0x33, "Math_Alphanum"),
    c(0x1D5FF, None, "MATHEMATICAL SANS-SERIF BOLD SMALL R", 0x33, "Math_Alphanum"),
    c(0x1D600, None, "MATHEMATICAL SANS-SERIF BOLD SMALL S", 0x33, "Math_Alphanum"),
    c(0x1D601, None, "MATHEMATICAL SANS-SERIF BOLD SMALL T", 0x33, "Math_Alphanum"),
    c(0x1D602, None, "MATHEMATICAL SANS-SERIF BOLD SMALL U", 0x33, "Math_Alphanum"),
    c(0x1D603, None, "MATHEMATICAL SANS-SERIF BOLD SMALL V", 0x33, "Math_Alphanum"),
    c(0x1D604, None, "MATHEMATICAL SANS-SERIF BOLD SMALL W", 0x33, "Math_Alphanum"),
    c(0x1D605, None, "MATHEMATICAL SANS-SERIF BOLD SMALL X", 0x33, "Math_Alphanum"),
    c(0x1D606, None, "MATHEMATICAL SANS-SERIF BOLD SMALL Y", 0x33, "Math_Alphanum"),
    c(0x1D607, None, "MATHEMATICAL SANS-SERIF BOLD SMALL Z", 0x33, "Math_Alphanum"),
    c(0x1D608, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL A", 0x33, "Math_Alphanum"),
    c(0x1D609, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL B", 0x33, "Math_Alphanum"),
    c(0x1D60A, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL C", 0x33, "Math_Alphanum"),
    c(0x1D60B, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL D", 0x33, "Math_Alphanum"),
    c(0x1D60C, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL E", 0x33, "Math_Alphanum"),
    c(0x1D60D, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL F", 0x33, "Math_Alphanum"),
    c(0x1D60E, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL G", 0x33, "Math_Alphanum"),
    c(0x1D60F, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL H", 0x33, "Math_Alphanum"),
    c(0x1D610, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL I", 0x33, "Math_Alphanum"),
    c(0x1D611, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL J", 0x33, "Math_Alphanum"),
    c(0x1D612, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL K", 0x33, "Math_Alphanum"),
    c(0x1D613, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL L", 0x33, "Math_Alphanum"),
    c(0x1D614, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL M", 0x33, "Math_Alphanum"),
    c(0x1D615, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL N", 0x33, "Math_Alphanum"),
    c(0x1D616, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL O", 0x33, "Math_Alphanum"),
    c(0x1D617, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL P", 0x33, "Math_Alphanum"),
    c(0x1D618, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL Q", 0x33, "Math_Alphanum"),
    c(0x1D619, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL R", 0x33, "Math_Alphanum"),
    c(0x1D61A, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL S", 0x33, "Math_Alphanum"),
    c(0x1D61B, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL T", 0x33, "Math_Alphanum"),
    c(0x1D61C, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL U", 0x33, "Math_Alphanum"),
    c(0x1D61D, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL V", 0x33, "Math_Alphanum"),
    c(0x1D61E, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL W", 0x33, "Math_Alphanum"),
    c(0x1D61F, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL X", 0x33, "Math_Alphanum"),
    c(0x1D620, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL Y", 0x33, "Math_Alphanum"),
    c(0x1D621, None, "MATHEMATICAL SANS-SERIF ITALIC CAPITAL Z", 0x33, "Math_Alphanum"),
    c(0x1D622, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL A", 0x33, "Math_Alphanum"),
    c(0x1D623, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL B", 0x33, "Math_Alphanum"),
    c(0x1D624, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL C", 0x33, "Math_Alphanum"),
    c(0x1D625, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL D", 0x33, "Math_Alphanum"),
    c(0x1D626, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL E", 0x33, "Math_Alphanum"),
    c(0x1D627, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL F", 0x33, "Math_Alphanum"),
    c(0x1D628, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL G", 0x33, "Math_Alphanum"),
    c(0x1D629, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL H", 0x33, "Math_Alphanum"),
    c(0x1D62A, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL I", 0x33, "Math_Alphanum"),
    c(0x1D62B, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL J", 0x33, "Math_Alphanum"),
    c(0x1D62C, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL K", 0x33, "Math_Alphanum"),
    c(0x1D62D, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL L", 0x33, "Math_Alphanum"),
    c(0x1D62E, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL M", 0x33, "Math_Alphanum"),
    c(0x1D62F, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL N", 0x33, "Math_Alphanum"),
    c(0x1D630, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL O", 0x33, "Math_Alphanum"),
    c(0x1D631, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL P", 0x33, "Math_Alphanum"),
    c(0x1D632, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL Q", 0x33, "Math_Alphanum"),
    c(0x1D633, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL R", 0x33, "Math_Alphanum"),
    c(0x1D634, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL S", 0x33, "Math_Alphanum"),
    c(0x1D635, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL T", 0x33, "Math_Alphanum"),
    c(0x1D636, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL U", 0x33, "Math_Alphanum"),
    c(0x1D637, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL V", 0x33, "Math_Alphanum"),
    c(0x1D638, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL W", 0x33, "Math_Alphanum"),
    c(0x1D639, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL X", 0x33, "Math_Alphanum"),
    c(0x1D63A, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL Y", 0x33, "Math_Alphanum"),
    c(0x1D63B, None, "MATHEMATICAL SANS-SERIF ITALIC SMALL Z", 0x33, "Math_Alphanum"),
    c(0x1D63C, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL A", 0x33, "Math_Alphanum"),
    c(0x1D63D, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL B", 0x33, "Math_Alphanum"),
    c(0x1D63E, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL C", 0x33, "Math_Alphanum"),
    c(0x1D63F, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL D", 0x33, "Math_Alphanum"),
    c(0x1D640, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL E", 0x33, "Math_Alphanum"),
    c(0x1D641, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL F", 0x33, "Math_Alphanum"),
    c(0x1D642, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL G", 0x33, "Math_Alphanum"),
    c(0x1D643, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL H", 0x33, "Math_Alphanum"),
    c(0x1D644, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL I", 0x33, "Math_Alphanum"),
    c(0x1D645, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL J", 0x33, "Math_Alphanum"),
    c(0x1D646, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL K", 0x33, "Math_Alphanum"),
    c(0x1D647, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL L", 0x33, "Math_Alphanum"),
    c(0x1D648, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL M", 0x33, "Math_Alphanum"),
    c(0x1D649, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL N", 0x33, "Math_Alphanum"),
    c(0x1D64A, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL O", 0x33, "Math_Alphanum"),
    c(0x1D64B, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL P", 0x33, "Math_Alphanum"),
    c(0x1D64C, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL Q", 0x33, "Math_Alphanum"),
    c(0x1D64D, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL R", 0x33, "Math_Alphanum"),
    c(0x1D64E, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL S", 0x33, "Math_Alphanum"),
    c(0x1D64F, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL T", 0x33, "Math_Alphanum"),
    c(0x1D650, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL U", 0x33, "Math_Alphanum"),
    c(0x1D651, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL V", 0x33, "Math_Alphanum"),
    c(0x1D652, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL W", 0x33, "Math_Alphanum"),
    c(0x1D653, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL X", 0x33, "Math_Alphanum"),
    c(0x1D654, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL Y", 0x33, "Math_Alphanum"),
    c(0x1D655, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL Z", 0x33, "Math_Alphanum"),
    c(0x1D656, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL A", 0x33, "Math_Alphanum"),
    c(0x1D657, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL B", 0x33, "Math_Alphanum"),
    c(0x1D658, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL C", 0x33, "Math_Alphanum"),
    c(0x1D659, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL D", 0x33, "Math_Alphanum"),
    c(0x1D65A, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL E", 0x33, "Math_Alphanum"),
    c(0x1D65B, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL F", 0x33, "Math_Alphanum"),
    c(0x1D65C, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL G", 0x33, "Math_Alphanum"),
    c(0x1D65D, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL H", 0x33, "Math_Alphanum"),
    c(0x1D65E, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL I", 0x33, "Math_Alphanum"),
    c(0x1D65F, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL J", 0x33, "Math_Alphanum"),
    c(0x1D660, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL K", 0x33, "Math_Alphanum"),
    c(0x1D661, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL L", 0x33, "Math_Alphanum"),
    c(0x1D662, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL M", 0x33, "Math_Alphanum"),
    c(0x1D663, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL N", 0x33, "Math_Alphanum"),
    c(0x1D664, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL O", 0x33, "Math_Alphanum"),
    c(0x1D665, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL P", 0x33, "Math_Alphanum"),
    c(0x1D666, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL Q", 0x33, "Math_Alphanum"),
    c(0x1D667, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL R", 0x33, "Math_Alphanum"),
    c(0x1D668, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL S", 0x33, "Math_Alphanum"),
    c(0x1D669, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL T", 0x33, "Math_Alphanum"),
    c(0x1D66A, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL U", 0x33, "Math_Alphanum"),
    c(0x1D66B, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL V", 0x33, "Math_Alphanum"),
    c(0x1D66C, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL W", 0x33, "Math_Alphanum"),
    c(0x1D66D, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL X", 0x33, "Math_Alphanum"),
    c(0x1D66E, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL Y", 0x33, "Math_Alphanum"),
    c(0x1D66F, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL Z", 0x33, "Math_Alphanum"),
    c(0x1D670, None, "MATHEMATICAL MONOSPACE CAPITAL A", 0x33, "Math_Alphanum"),
    c(0x1D671, None, "MATHEMATICAL MONOSPACE CAPITAL B", 0x33, "Math_Alphanum"),
    c(0x1D672, None, "MATHEMATICAL MONOSPACE CAPITAL C", 0x33, "Math_Alphanum"),
    c(0x1D673, None, "MATHEMATICAL MONOSPACE CAPITAL D", 0x33, "Math_Alphanum"),
    c(0x1D674, None, "MATHEMATICAL MONOSPACE CAPITAL E", 0x33, "Math_Alphanum"),
    c(0x1D675, None, "MATHEMATICAL MONOSPACE CAPITAL F", 0x33, "Math_Alphanum"),
    c(0x1D676, None, "MATHEMATICAL MONOSPACE CAPITAL G", 0x33, "Math_Alphanum"),
    c(0x1D677, None, "MATHEMATICAL MONOSPACE CAPITAL H", 0x33, "Math_Alphanum"),
    c(0x1D678, None, "MATHEMATICAL MONOSPACE CAPITAL I", 0x33, "Math_Alphanum"),
    c(0x1D679, None, "MATHEMATICAL MONOSPACE CAPITAL J", 0x33, "Math_Alphanum"),
    c(0x1D67A, None, "MATHEMATICAL MONOSPACE CAPITAL K", 0x33, "Math_Alphanum"),
    c(0x1D67B, None, "MATHEMATICAL MONOSPACE CAPITAL L", 0x33, "Math_Alphanum"),
    c(0x1D67C, None, "MATHEMATICAL MONOSPACE CAPITAL M", 0x33, "Math_Alphanum"),
    c(0x1D67D, None, "MATHEMATICAL MONOSPACE CAPITAL N", 0x33, "Math_Alphanum"),
    c(0x1D67E, None, "MATHEMATICAL MONOSPACE CAPITAL O", 0x33, "Math_Alphanum"),
    c(0x1D67F, None, "MATHEMATICAL MONOSPACE CAPITAL P", 0x33, "Math_Alphanum"),
    c(0x1D680, None, "MATHEMATICAL MONOSPACE CAPITAL Q", 0x33, "Math_Alphanum"),
    c(0x1D681, None, "MATHEMATICAL MONOSPACE CAPITAL R", 0x33, "Math_Alphanum"),
    c(0x1D682, None, "MATHEMATICAL MONOSPACE CAPITAL S", 0x33, "Math_Alphanum"),
    c(0x1D683, None, "MATHEMATICAL MONOSPACE CAPITAL T", 0x33, "Math_Alphanum"),
    c(0x1D684, None, "MATHEMATICAL MONOSPACE CAPITAL U", 0x33, "Math_Alphanum"),
    c(0x1D685, None, "MATHEMATICAL MONOSPACE CAPITAL V", 0x33, "Math_Alphanum"),
    c(0x1D686, None, "MATHEMATICAL MONOSPACE CAPITAL W", 0x33, "Math_Alphanum"),
    c(0x1D687, None, "MATHEMATICAL MONOSPACE CAPITAL X", 0x33, "Math_Alphanum"),
    c(0x1D688, None, "MATHEMATICAL MONOSPACE CAPITAL Y", 0x33, "Math_Alphanum"),
    c(0x1D689, None, "MATHEMATICAL MONOSPACE CAPITAL Z", 0x33, "Math_Alphanum"),
    c(0x1D68A, None, "MATHEMATICAL MONOSPACE SMALL A", 0x33, "Math_Alphanum"),
    c(0x1D68B, None, "MATHEMATICAL MONOSPACE SMALL B", 0x33, "Math_Alphanum"),
    c(0x1D68C, None, "MATHEMATICAL MONOSPACE SMALL C", 0x33, "Math_Alphanum"),
    c(0x1D68D, None, "MATHEMATICAL MONOSPACE SMALL D", 0x33, "Math_Alphanum"),
    c(0x1D68E, None, "MATHEMATICAL MONOSPACE SMALL E", 0x33, "Math_Alphanum"),
    c(0x1D68F, None, "MATHEMATICAL MONOSPACE SMALL F", 0x33, "Math_Alphanum"),
    c(0x1D690, None, "MATHEMATICAL MONOSPACE SMALL G", 0x33, "Math_Alphanum"),
    c(0x1D691, None, "MATHEMATICAL MONOSPACE SMALL H", 0x33, "Math_Alphanum"),
    c(0x1D692, None, "MATHEMATICAL MONOSPACE SMALL I", 0x33, "Math_Alphanum"),
    c(0x1D693, None, "MATHEMATICAL MONOSPACE SMALL J", 0x33, "Math_Alphanum"),
    c(0x1D694, None, "MATHEMATICAL MONOSPACE SMALL K", 0x33, "Math_Alphanum"),
    c(0x1D695, None, "MATHEMATICAL MONOSPACE SMALL L", 0x33, "Math_Alphanum"),
    c(0x1D696, None, "MATHEMATICAL MONOSPACE SMALL M", 0x33, "Math_Alphanum"),
    c(0x1D697, None, "MATHEMATICAL MONOSPACE SMALL N", 0x33, "Math_Alphanum"),
    c(0x1D698, None, "MATHEMATICAL MONOSPACE SMALL O", 0x33, "Math_Alphanum"),
    c(0x1D699, None, "MATHEMATICAL MONOSPACE SMALL P", 0x33, "Math_Alphanum"),
    c(0x1D69A, None, "MATHEMATICAL MONOSPACE SMALL Q", 0x33, "Math_Alphanum"),
    c(0x1D69B, None, "MATHEMATICAL MONOSPACE SMALL R", 0x33, "Math_Alphanum"),
    c(0x1D69C, None, "MATHEMATICAL MONOSPACE SMALL S", 0x33, "Math_Alphanum"),
    c(0x1D69D, None, "MATHEMATICAL MONOSPACE SMALL T", 0x33, "Math_Alphanum"),
    c(0x1D69E, None, "MATHEMATICAL MONOSPACE SMALL U", 0x33, "Math_Alphanum"),
    c(0x1D69F, None, "MATHEMATICAL MONOSPACE SMALL V", 0x33, "Math_Alphanum"),
    c(0x1D6A0, None, "MATHEMATICAL MONOSPACE SMALL W", 0x33, "Math_Alphanum"),
    c(0x1D6A1, None, "MATHEMATICAL MONOSPACE SMALL X", 0x33, "Math_Alphanum"),
    c(0x1D6A2, None, "MATHEMATICAL MONOSPACE SMALL Y", 0x33, "Math_Alphanum"),
    c(0x1D6A3, None, "MATHEMATICAL MONOSPACE SMALL Z", 0x33, "Math_Alphanum"),
    c(0x1D6A4, None, "MATHEMATICAL ITALIC SMALL DOTLESS I", 0x33, "Math_Alphanum"),
    c(0x1D6A5, None, "MATHEMATICAL ITALIC SMALL DOTLESS J", 0x33, "Math_Alphanum"),
    c(0x1D6A8, None, "MATHEMATICAL BOLD CAPITAL ALPHA", 0x33, "Math_Alphanum"),
    c(0x1D6A9, None, "MATHEMATICAL BOLD CAPITAL BETA", 0x33, "Math_Alphanum"),
    c(0x1D6AA, None, "MATHEMATICAL BOLD CAPITAL GAMMA", 0x33, "Math_Alphanum"),
    c(0x1D6AB, None, "MATHEMATICAL BOLD CAPITAL DELTA", 0x33, "Math_Alphanum"),
    c(0x1D6AC, None, "MATHEMATICAL BOLD CAPITAL EPSILON", 0x33, "Math_Alphanum"),
    c(0x1D6AD, None, "MATHEMATICAL BOLD CAPITAL ZETA", 0x33, "Math_Alphanum"),
    c(0x1D6AE, None, "MATHEMATICAL BOLD CAPITAL ETA", 0x33, "Math_Alphanum"),
    c(0x1D6AF, None, "MATHEMATICAL BOLD CAPITAL THETA", 0x33, "Math_Alphanum"),
    c(0x1D6B0, None, "MATHEMATICAL BOLD CAPITAL IOTA", 0x33, "Math_Alphanum"),
    c(0x1D6B1, None, "MATHEMATICAL BOLD CAPITAL KAPPA", 0x33, "Math_Alphanum"),
    c(0x1D6B2, None, "MATHEMATICAL BOLD CAPITAL LAMDA", 0x33, "Math_Alphanum"),
    c(0x1D6B3, None, "MATHEMATICAL BOLD CAPITAL MU", 0x33, "Math_Alphanum"),
    c(0x1D6B4, None, "MATHEMATICAL BOLD CAPITAL NU", 0x33, "Math_Alphanum"),
    c(0x1D6B5, None, "MATHEMATICAL BOLD CAPITAL XI", 0x33, "Math_Alphanum"),
    c(0x1D6B6, None, "MATHEMATICAL BOLD CAPITAL OMICRON", 0x33, "Math_Alphanum"),
    c(0x1D6B7, None, "MATHEMATICAL BOLD CAPITAL PI", 0x33, "Math_Alphanum"),
    c(0x1D6B8, None, "MATHEMATICAL BOLD CAPITAL RHO", 0x33, "Math_Alphanum"),
    c(0x1D6B9, None, "MATHEMATICAL BOLD CAPITAL THETA SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D6BA, None, "MATHEMATICAL BOLD CAPITAL SIGMA", 0x33, "Math_Alphanum"),
    c(0x1D6BB, None, "MATHEMATICAL BOLD CAPITAL TAU", 0x33, "Math_Alphanum"),
    c(0x1D6BC, None, "MATHEMATICAL BOLD CAPITAL UPSILON", 0x33, "Math_Alphanum"),
    c(0x1D6BD, None, "MATHEMATICAL BOLD CAPITAL PHI", 0x33, "Math_Alphanum"),
    c(0x1D6BE, None, "MATHEMATICAL BOLD CAPITAL CHI", 0x33, "Math_Alphanum"),
    c(0x1D6BF, None, "MATHEMATICAL BOLD CAPITAL PSI", 0x33, "Math_Alphanum"),
    c(0x1D6C0, None, "MATHEMATICAL BOLD CAPITAL OMEGA", 0x33, "Math_Alphanum"),
    c(0x1D6C1, None, "MATHEMATICAL BOLD NABLA", 0x02, "Math_Alphanum"),
    c(0x1D6C2, None, "MATHEMATICAL BOLD SMALL ALPHA", 0x33, "Math_Alphanum"),
    c(0x1D6C3, None, "MATHEMATICAL BOLD SMALL BETA", 0x33, "Math_Alphanum"),
    c(0x1D6C4, None, "MATHEMATICAL BOLD SMALL GAMMA", 0x33, "Math_Alphanum"),
    c(0x1D6C5, None, "MATHEMATICAL BOLD SMALL DELTA", 0x33, "Math_Alphanum"),
    c(0x1D6C6, None, "MATHEMATICAL BOLD SMALL EPSILON", 0x33, "Math_Alphanum"),
    c(0x1D6C7, None, "MATHEMATICAL BOLD SMALL ZETA", 0x33, "Math_Alphanum"),
    c(0x1D6C8, None, "MATHEMATICAL BOLD SMALL ETA", 0x33, "Math_Alphanum"),
    c(0x1D6C9, None, "MATHEMATICAL BOLD SMALL THETA", 0x33, "Math_Alphanum"),
    c(0x1D6CA, None, "MATHEMATICAL BOLD SMALL IOTA", 0x33, "Math_Alphanum"),
    c(0x1D6CB, None, "MATHEMATICAL BOLD SMALL KAPPA", 0x33, "Math_Alphanum"),
    c(0x1D6CC, None, "MATHEMATICAL BOLD SMALL LAMDA", 0x33, "Math_Alphanum"),
    c(0x1D6CD, None, "MATHEMATICAL BOLD SMALL MU", 0x33, "Math_Alphanum"),
    c(0x1D6CE, None, "MATHEMATICAL BOLD SMALL NU", 0x33, "Math_Alphanum"),
    c(0x1D6CF, None, "MATHEMATICAL BOLD SMALL XI", 0x33, "Math_Alphanum"),
    c(0x1D6D0, None, "MATHEMATICAL BOLD SMALL OMICRON", 0x33, "Math_Alphanum"),
    c(0x1D6D1, None, "MATHEMATICAL BOLD SMALL PI", 0x33, "Math_Alphanum"),
    c(0x1D6D2, None, "MATHEMATICAL BOLD SMALL RHO", 0x33, "Math_Alphanum"),
    c(0x1D6D3, None, "MATHEMATICAL BOLD SMALL FINAL SIGMA", 0x33, "Math_Alphanum"),
    c(0x1D6D4, None, "MATHEMATICAL BOLD SMALL SIGMA", 0x33, "Math_Alphanum"),
    c(0x1D6D5, None, "MATHEMATICAL BOLD SMALL TAU", 0x33, "Math_Alphanum"),
    c(0x1D6D6, None, "MATHEMATICAL BOLD SMALL UPSILON", 0x33, "Math_Alphanum"),
    c(0x1D6D7, None, "MATHEMATICAL BOLD SMALL PHI", 0x33, "Math_Alphanum"),
    c(0x1D6D8, None, "MATHEMATICAL BOLD SMALL CHI", 0x33, "Math_Alphanum"),
    c(0x1D6D9, None, "MATHEMATICAL BOLD SMALL PSI", 0x33, "Math_Alphanum"),
    c(0x1D6DA, None, "MATHEMATICAL BOLD SMALL OMEGA", 0x33, "Math_Alphanum"),
    c(0x1D6DB, None, "MATHEMATICAL BOLD PARTIAL DIFFERENTIAL", 0x02, "Math_Alphanum"),
    c(0x1D6DC, None, "MATHEMATICAL BOLD EPSILON SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D6DD, None, "MATHEMATICAL BOLD THETA SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D6DE, None, "MATHEMATICAL BOLD KAPPA SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D6DF, None, "MATHEMATICAL BOLD PHI SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D6E0, None, "MATHEMATICAL BOLD RHO SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D6E1, None, "MATHEMATICAL BOLD PI SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D6E2, None, "MATHEMATICAL ITALIC CAPITAL ALPHA", 0x33, "Math_Alphanum"),
    c(0x1D6E3, None, "MATHEMATICAL ITALIC CAPITAL BETA", 0x33, "Math_Alphanum"),
    c(0x1D6E4, None, "MATHEMATICAL ITALIC CAPITAL GAMMA", 0x33, "Math_Alphanum"),
    c(0x1D6E5, None, "MATHEMATICAL ITALIC CAPITAL DELTA", 0x33, "Math_Alphanum"),
    c(0x1D6E6, None, "MATHEMATICAL ITALIC CAPITAL EPSILON", 0x33, "Math_Alphanum"),
    c(0x1D6E7, None, "MATHEMATICAL ITALIC CAPITAL ZETA", 0x33, "Math_Alphanum"),
    c(0x1D6E8, None, "MATHEMATICAL ITALIC CAPITAL ETA", 0x33, "Math_Alphanum"),
    c(0x1D6E9, None, "MATHEMATICAL ITALIC CAPITAL THETA", 0x33, "Math_Alphanum"),
    c(0x1D6EA, None, "MATHEMATICAL ITALIC CAPITAL IOTA", 0x33, "Math_Alphanum"),
    c(0x1D6EB, None, "MATHEMATICAL ITALIC CAPITAL KAPPA", 0x33, "Math_Alphanum"),
    c(0x1D6EC, None, "MATHEMATICAL ITALIC CAPITAL LAMDA", 0x33, "Math_Alphanum"),
    c(0x1D6ED, None, "MATHEMATICAL ITALIC CAPITAL MU", 0x33, "Math_Alphanum"),
    c(0x1D6EE, None, "MATHEMATICAL ITALIC CAPITAL NU", 0x33, "Math_Alphanum"),
    c(0x1D6EF, None, "MATHEMATICAL ITALIC CAPITAL XI", 0x33, "Math_Alphanum"),
    c(0x1D6F0, None, "MATHEMATICAL ITALIC CAPITAL OMICRON", 0x33, "Math_Alphanum"),
    c(0x1D6F1, None, "MATHEMATICAL ITALIC CAPITAL PI", 0x33, "Math_Alphanum"),
    c(0x1D6F2, None, "MATHEMATICAL ITALIC CAPITAL RHO", 0x33, "Math_Alphanum"),
    c(0x1D6F3, None, "MATHEMATICAL ITALIC CAPITAL THETA SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D6F4, None, "MATHEMATICAL ITALIC CAPITAL SIGMA", 0x33, "Math_Alphanum"),
    c(0x1D6F5, None, "MATHEMATICAL ITALIC CAPITAL TAU", 0x33, "Math_Alphanum"),
    c(0x1D6F6, None, "MATHEMATICAL ITALIC CAPITAL UPSILON", 0x33, "Math_Alphanum"),
    c(0x1D6F7, None, "MATHEMATICAL ITALIC CAPITAL PHI", 0x33, "Math_Alphanum"),
    c(0x1D6F8, None, "MATHEMATICAL ITALIC CAPITAL CHI", 0x33, "Math_Alphanum"),
    c(0x1D6F9, None, "MATHEMATICAL ITALIC CAPITAL PSI", 0x33, "Math_Alphanum"),
    c(0x1D6FA, None, "MATHEMATICAL ITALIC CAPITAL OMEGA", 0x33, "Math_Alphanum"),
    c(0x1D6FB, None, "MATHEMATICAL ITALIC NABLA", 0x02, "Math_Alphanum"),
    c(0x1D6FC, None, "MATHEMATICAL ITALIC SMALL ALPHA", 0x33, "Math_Alphanum"),
    c(0x1D6FD, None, "MATHEMATICAL ITALIC SMALL BETA", 0x33, "Math_Alphanum"),
    c(0x1D6FE, None, "MATHEMATICAL ITALIC SMALL GAMMA", 0x33, "Math_Alphanum"),
    c(0x1D6FF, None, "MATHEMATICAL ITALIC SMALL DELTA", 0x33, "Math_Alphanum"),
    c(0x1D700, None, "MATHEMATICAL ITALIC SMALL EPSILON", 0x33, "Math_Alphanum"),
    c(0x1D701, None, "MATHEMATICAL ITALIC SMALL ZETA", 0x33, "Math_Alphanum"),
    c(0x1D702, None, "MATHEMATICAL ITALIC SMALL ETA", 0x33, "Math_Alphanum"),
    c(0x1D703, None, "MATHEMATICAL ITALIC SMALL THETA", 0x33, "Math_Alphanum"),
    c(0x1D704, None, "MATHEMATICAL ITALIC SMALL IOTA", 0x33, "Math_Alphanum"),
    c(0x1D705, None, "MATHEMATICAL ITALIC SMALL KAPPA", 0x33, "Math_Alphanum"),
    c(0x1D706, None, "MATHEMATICAL ITALIC SMALL LAMDA", 0x33, "Math_Alphanum"),
    c(0x1D707, None, "MATHEMATICAL ITALIC SMALL MU", 0x33, "Math_Alphanum"),
    c(0x1D708, None, "MATHEMATICAL ITALIC SMALL NU", 0x33, "Math_Alphanum"),
    c(0x1D709, None, "MATHEMATICAL ITALIC SMALL XI", 0x33, "Math_Alphanum"),
    c(0x1D70A, None, "MATHEMATICAL ITALIC SMALL OMICRON", 0x33, "Math_Alphanum"),
    c(0x1D70B, None, "MATHEMATICAL ITALIC SMALL PI", 0x33, "Math_Alphanum"),
    c(0x1D70C, None, "MATHEMATICAL ITALIC SMALL RHO", 0x33, "Math_Alphanum"),
    c(0x1D70D, None, "MATHEMATICAL ITALIC SMALL FINAL SIGMA", 0x33, "Math_Alphanum"),
    c(0x1D70E, None, "MATHEMATICAL ITALIC SMALL SIGMA", 0x33, "Math_Alphanum"),
    c(0x1D70F, None, "MATHEMATICAL ITALIC SMALL TAU", 0x33, "Math_Alphanum"),
    c(0x1D710, None, "MATHEMATICAL ITALIC SMALL UPSILON", 0x33, "Math_Alphanum"),
    c(0x1D711, None, "MATHEMATICAL ITALIC SMALL PHI", 0x33, "Math_Alphanum"),
    c(0x1D712, None, "MATHEMATICAL ITALIC SMALL CHI", 0x33, "Math_Alphanum"),
    c(0x1D713, None, "MATHEMATICAL ITALIC SMALL PSI", 0x33, "Math_Alphanum"),
    c(0x1D714, None, "MATHEMATICAL ITALIC SMALL OMEGA", 0x33, "Math_Alphanum"),
    c(0x1D715, None, "MATHEMATICAL ITALIC PARTIAL DIFFERENTIAL", 0x02, "Math_Alphanum"),
    c(0x1D716, None, "MATHEMATICAL ITALIC EPSILON SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D717, None, "MATHEMATICAL ITALIC THETA SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D718, None, "MATHEMATICAL ITALIC KAPPA SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D719, None, "MATHEMATICAL ITALIC PHI SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D71A, None, "MATHEMATICAL ITALIC RHO SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D71B, None, "MATHEMATICAL ITALIC PI SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D71C, None, "MATHEMATICAL BOLD ITALIC CAPITAL ALPHA", 0x33, "Math_Alphanum"),
    c(0x1D71D, None, "MATHEMATICAL BOLD ITALIC CAPITAL BETA", 0x33, "Math_Alphanum"),
    c(0x1D71E, None, "MATHEMATICAL BOLD ITALIC CAPITAL GAMMA", 0x33, "Math_Alphanum"),
    c(0x1D71F, None, "MATHEMATICAL BOLD ITALIC CAPITAL DELTA", 0x33, "Math_Alphanum"),
    c(0x1D720, None, "MATHEMATICAL BOLD ITALIC CAPITAL EPSILON", 0x33, "Math_Alphanum"),
    c(0x1D721, None, "MATHEMATICAL BOLD ITALIC CAPITAL ZETA", 0x33, "Math_Alphanum"),
    c(0x1D722, None, "MATHEMATICAL BOLD ITALIC CAPITAL ETA", 0x33, "Math_Alphanum"),
    c(0x1D723, None, "MATHEMATICAL BOLD ITALIC CAPITAL THETA", 0x33, "Math_Alphanum"),
    c(0x1D724, None, "MATHEMATICAL BOLD ITALIC CAPITAL IOTA", 0x33, "Math_Alphanum"),
    c(0x1D725, None, "MATHEMATICAL BOLD ITALIC CAPITAL KAPPA", 0x33, "Math_Alphanum"),
    c(0x1D726, None, "MATHEMATICAL BOLD ITALIC CAPITAL LAMDA", 0x33, "Math_Alphanum"),
    c(0x1D727, None, "MATHEMATICAL BOLD ITALIC CAPITAL MU", 0x33, "Math_Alphanum"),
    c(0x1D728, None, "MATHEMATICAL BOLD ITALIC CAPITAL NU", 0x33, "Math_Alphanum"),
    c(0x1D729, None, "MATHEMATICAL BOLD ITALIC CAPITAL XI", 0x33, "Math_Alphanum"),
    c(0x1D72A, None, "MATHEMATICAL BOLD ITALIC CAPITAL OMICRON", 0x33, "Math_Alphanum"),
    c(0x1D72B, None, "MATHEMATICAL BOLD ITALIC CAPITAL PI", 0x33, "Math_Alphanum"),
    c(0x1D72C, None, "MATHEMATICAL BOLD ITALIC CAPITAL RHO", 0x33, "Math_Alphanum"),
    c(0x1D72D, None, "MATHEMATICAL BOLD ITALIC CAPITAL THETA SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D72E, None, "MATHEMATICAL BOLD ITALIC CAPITAL SIGMA", 0x33, "Math_Alphanum"),
    c(0x1D72F, None, "MATHEMATICAL BOLD ITALIC CAPITAL TAU", 0x33, "Math_Alphanum"),
    c(0x1D730, None, "MATHEMATICAL BOLD ITALIC CAPITAL UPSILON", 0x33, "Math_Alphanum"),
    c(0x1D731, None, "MATHEMATICAL BOLD ITALIC CAPITAL PHI", 0x33, "Math_Alphanum"),
    c(0x1D732, None, "MATHEMATICAL BOLD ITALIC CAPITAL CHI", 0x33, "Math_Alphanum"),
    c(0x1D733, None, "MATHEMATICAL BOLD ITALIC CAPITAL PSI", 0x33, "Math_Alphanum"),
    c(0x1D734, None, "MATHEMATICAL BOLD ITALIC CAPITAL OMEGA", 0x33, "Math_Alphanum"),
    c(0x1D735, None, "MATHEMATICAL BOLD ITALIC NABLA", 0x02, "Math_Alphanum"),
    c(0x1D736, None, "MATHEMATICAL BOLD ITALIC SMALL ALPHA", 0x33, "Math_Alphanum"),
    c(0x1D737, None, "MATHEMATICAL BOLD ITALIC SMALL BETA", 0x33, "Math_Alphanum"),
    c(0x1D738, None, "MATHEMATICAL BOLD ITALIC SMALL GAMMA", 0x33, "Math_Alphanum"),
    c(0x1D739, None, "MATHEMATICAL BOLD ITALIC SMALL DELTA", 0x33, "Math_Alphanum"),
    c(0x1D73A, None, "MATHEMATICAL BOLD ITALIC SMALL EPSILON", 0x33, "Math_Alphanum"),
    c(0x1D73B, None, "MATHEMATICAL BOLD ITALIC SMALL ZETA", 0x33, "Math_Alphanum"),
    c(0x1D73C, None, "MATHEMATICAL BOLD ITALIC SMALL ETA", 0x33, "Math_Alphanum"),
    c(0x1D73D, None, "MATHEMATICAL BOLD ITALIC SMALL THETA", 0x33, "Math_Alphanum"),
    c(0x1D73E, None, "MATHEMATICAL BOLD ITALIC SMALL IOTA", 0x33, "Math_Alphanum"),
    c(0x1D73F, None, "MATHEMATICAL BOLD ITALIC SMALL KAPPA", 0x33, "Math_Alphanum"),
    c(0x1D740, None, "MATHEMATICAL BOLD ITALIC SMALL LAMDA", 0x33, "Math_Alphanum"),
    c(0x1D741, None, "MATHEMATICAL BOLD ITALIC SMALL MU", 0x33, "Math_Alphanum"),
    c(0x1D742, None, "MATHEMATICAL BOLD ITALIC SMALL NU", 0x33, "Math_Alphanum"),
    c(0x1D743, None, "MATHEMATICAL BOLD ITALIC SMALL XI", 0x33, "Math_Alphanum"),
    c(0x1D744, None, "MATHEMATICAL BOLD ITALIC SMALL OMICRON", 0x33, "Math_Alphanum"),
    c(0x1D745, None, "MATHEMATICAL BOLD ITALIC SMALL PI", 0x33, "Math_Alphanum"),
    c(0x1D746, None, "MATHEMATICAL BOLD ITALIC SMALL RHO", 0x33, "Math_Alphanum"),
    c(0x1D747, None, "MATHEMATICAL BOLD ITALIC SMALL FINAL SIGMA", 0x33, "Math_Alphanum"),
    c(0x1D748, None, "MATHEMATICAL BOLD ITALIC SMALL SIGMA", 0x33, "Math_Alphanum"),
    c(0x1D749, None, "MATHEMATICAL BOLD ITALIC SMALL TAU", 0x33, "Math_Alphanum"),
    c(0x1D74A, None, "MATHEMATICAL BOLD ITALIC SMALL UPSILON", 0x33, "Math_Alphanum"),
    c(0x1D74B, None, "MATHEMATICAL BOLD ITALIC SMALL PHI", 0x33, "Math_Alphanum"),
    c(0x1D74C, None, "MATHEMATICAL BOLD ITALIC SMALL CHI", 0x33, "Math_Alphanum"),
    c(0x1D74D, None, "MATHEMATICAL BOLD ITALIC SMALL PSI", 0x33, "Math_Alphanum"),
    c(0x1D74E, None, "MATHEMATICAL BOLD ITALIC SMALL OMEGA", 0x33, "Math_Alphanum"),
    c(0x1D74F, None, "MATHEMATICAL BOLD ITALIC PARTIAL DIFFERENTIAL", 0x02, "Math_Alphanum"),
    c(0x1D750, None, "MATHEMATICAL BOLD ITALIC EPSILON SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D751, None, "MATHEMATICAL BOLD ITALIC THETA SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D752, None, "MATHEMATICAL BOLD ITALIC KAPPA SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D753, None, "MATHEMATICAL BOLD ITALIC PHI SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D754, None, "MATHEMATICAL BOLD ITALIC RHO SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D755, None, "MATHEMATICAL BOLD ITALIC PI SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D756, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL ALPHA", 0x33, "Math_Alphanum"),
    c(0x1D757, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL BETA", 0x33, "Math_Alphanum"),
    c(0x1D758, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL GAMMA", 0x33, "Math_Alphanum"),
    c(0x1D759, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL DELTA", 0x33, "Math_Alphanum"),
    c(0x1D75A, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL EPSILON", 0x33, "Math_Alphanum"),
    c(0x1D75B, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL ZETA", 0x33, "Math_Alphanum"),
    c(0x1D75C, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL ETA", 0x33, "Math_Alphanum"),
    c(0x1D75D, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL THETA", 0x33, "Math_Alphanum"),
    c(0x1D75E, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL IOTA", 0x33, "Math_Alphanum"),
    c(0x1D75F, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL KAPPA", 0x33, "Math_Alphanum"),
    c(0x1D760, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL LAMDA", 0x33, "Math_Alphanum"),
    c(0x1D761, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL MU", 0x33, "Math_Alphanum"),
    c(0x1D762, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL NU", 0x33, "Math_Alphanum"),
    c(0x1D763, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL XI", 0x33, "Math_Alphanum"),
    c(0x1D764, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL OMICRON", 0x33, "Math_Alphanum"),
    c(0x1D765, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL PI", 0x33, "Math_Alphanum"),
    c(0x1D766, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL RHO", 0x33, "Math_Alphanum"),
    c(0x1D767, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL THETA SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D768, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL SIGMA", 0x33, "Math_Alphanum"),
    c(0x1D769, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL TAU", 0x33, "Math_Alphanum"),
    c(0x1D76A, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL UPSILON", 0x33, "Math_Alphanum"),
    c(0x1D76B, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL PHI", 0x33, "Math_Alphanum"),
    c(0x1D76C, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL CHI", 0x33, "Math_Alphanum"),
    c(0x1D76D, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL PSI", 0x33, "Math_Alphanum"),
    c(0x1D76E, None, "MATHEMATICAL SANS-SERIF BOLD CAPITAL OMEGA", 0x33, "Math_Alphanum"),
    c(0x1D76F, None, "MATHEMATICAL SANS-SERIF BOLD NABLA", 0x02, "Math_Alphanum"),
    c(0x1D770, None, "MATHEMATICAL SANS-SERIF BOLD SMALL ALPHA", 0x33, "Math_Alphanum"),
    c(0x1D771, None, "MATHEMATICAL SANS-SERIF BOLD SMALL BETA", 0x33, "Math_Alphanum"),
    c(0x1D772, None, "MATHEMATICAL SANS-SERIF BOLD SMALL GAMMA", 0x33, "Math_Alphanum"),
    c(0x1D773, None, "MATHEMATICAL SANS-SERIF BOLD SMALL DELTA", 0x33, "Math_Alphanum"),
    c(0x1D774, None, "MATHEMATICAL SANS-SERIF BOLD SMALL EPSILON", 0x33, "Math_Alphanum"),
    c(0x1D775, None, "MATHEMATICAL SANS-SERIF BOLD SMALL ZETA", 0x33, "Math_Alphanum"),
    c(0x1D776, None, "MATHEMATICAL SANS-SERIF BOLD SMALL ETA", 0x33, "Math_Alphanum"),
    c(0x1D777, None, "MATHEMATICAL SANS-SERIF BOLD SMALL THETA", 0x33, "Math_Alphanum"),
    c(0x1D778, None, "MATHEMATICAL SANS-SERIF BOLD SMALL IOTA", 0x33, "Math_Alphanum"),
    c(0x1D779, None, "MATHEMATICAL SANS-SERIF BOLD SMALL KAPPA", 0x33, "Math_Alphanum"),
    c(0x1D77A, None, "MATHEMATICAL SANS-SERIF BOLD SMALL LAMDA", 0x33, "Math_Alphanum"),
    c(0x1D77B, None, "MATHEMATICAL SANS-SERIF BOLD SMALL MU", 0x33, "Math_Alphanum"),
    c(0x1D77C, None, "MATHEMATICAL SANS-SERIF BOLD SMALL NU", 0x33, "Math_Alphanum"),
    c(0x1D77D, None, "MATHEMATICAL SANS-SERIF BOLD SMALL XI", 0x33, "Math_Alphanum"),
    c(0x1D77E, None, "MATHEMATICAL SANS-SERIF BOLD SMALL OMICRON", 0x33, "Math_Alphanum"),
    c(0x1D77F, None, "MATHEMATICAL SANS-SERIF BOLD SMALL PI", 0x33, "Math_Alphanum"),
    c(0x1D780, None, "MATHEMATICAL SANS-SERIF BOLD SMALL RHO", 0x33, "Math_Alphanum"),
    c(0x1D781, None, "MATHEMATICAL SANS-SERIF BOLD SMALL FINAL SIGMA", 0x33, "Math_Alphanum"),
    c(0x1D782, None, "MATHEMATICAL SANS-SERIF BOLD SMALL SIGMA", 0x33, "Math_Alphanum"),
    c(0x1D783, None, "MATHEMATICAL SANS-SERIF BOLD SMALL TAU", 0x33, "Math_Alphanum"),
    c(0x1D784, None, "MATHEMATICAL SANS-SERIF BOLD SMALL UPSILON", 0x33, "Math_Alphanum"),
    c(0x1D785, None, "MATHEMATICAL SANS-SERIF BOLD SMALL PHI", 0x33, "Math_Alphanum"),
    c(0x1D786, None, "MATHEMATICAL SANS-SERIF BOLD SMALL CHI", 0x33, "Math_Alphanum"),
    c(0x1D787, None, "MATHEMATICAL SANS-SERIF BOLD SMALL PSI", 0x33, "Math_Alphanum"),
    c(0x1D788, None, "MATHEMATICAL SANS-SERIF BOLD SMALL OMEGA", 0x33, "Math_Alphanum"),
    c(0x1D789, None, "MATHEMATICAL SANS-SERIF BOLD PARTIAL DIFFERENTIAL", 0x02, "Math_Alphanum"),
    c(0x1D78A, None, "MATHEMATICAL SANS-SERIF BOLD EPSILON SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D78B, None, "MATHEMATICAL SANS-SERIF BOLD THETA SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D78C, None, "MATHEMATICAL SANS-SERIF BOLD KAPPA SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D78D, None, "MATHEMATICAL SANS-SERIF BOLD PHI SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D78E, None, "MATHEMATICAL SANS-SERIF BOLD RHO SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D78F, None, "MATHEMATICAL SANS-SERIF BOLD PI SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D790, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL ALPHA", 0x33, "Math_Alphanum"),
    c(0x1D791, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL BETA", 0x33, "Math_Alphanum"),
    c(0x1D792, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL GAMMA", 0x33, "Math_Alphanum"),
    c(0x1D793, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL DELTA", 0x33, "Math_Alphanum"),
    c(0x1D794, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL EPSILON", 0x33, "Math_Alphanum"),
    c(0x1D795, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL ZETA", 0x33, "Math_Alphanum"),
    c(0x1D796, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL ETA", 0x33, "Math_Alphanum"),
    c(0x1D797, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL THETA", 0x33, "Math_Alphanum"),
    c(0x1D798, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL IOTA", 0x33, "Math_Alphanum"),
    c(0x1D799, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL KAPPA", 0x33, "Math_Alphanum"),
    c(0x1D79A, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL LAMDA", 0x33, "Math_Alphanum"),
    c(0x1D79B, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL MU", 0x33, "Math_Alphanum"),
    c(0x1D79C, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL NU", 0x33, "Math_Alphanum"),
    c(0x1D79D, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL XI", 0x33, "Math_Alphanum"),
    c(0x1D79E, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL OMICRON", 0x33, "Math_Alphanum"),
    c(0x1D79F, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL PI", 0x33, "Math_Alphanum"),
    c(0x1D7A0, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL RHO", 0x33, "Math_Alphanum"),
    c(0x1D7A1, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL THETA SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D7A2, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL SIGMA", 0x33, "Math_Alphanum"),
    c(0x1D7A3, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL TAU", 0x33, "Math_Alphanum"),
    c(0x1D7A4, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL UPSILON", 0x33, "Math_Alphanum"),
    c(0x1D7A5, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL PHI", 0x33, "Math_Alphanum"),
    c(0x1D7A6, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL CHI", 0x33, "Math_Alphanum"),
    c(0x1D7A7, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL PSI", 0x33, "Math_Alphanum"),
    c(0x1D7A8, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL OMEGA", 0x33, "Math_Alphanum"),
    c(0x1D7A9, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC NABLA", 0x02, "Math_Alphanum"),
    c(0x1D7AA, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL ALPHA", 0x33, "Math_Alphanum"),
    c(0x1D7AB, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL BETA", 0x33, "Math_Alphanum"),
    c(0x1D7AC, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL GAMMA", 0x33, "Math_Alphanum"),
    c(0x1D7AD, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL DELTA", 0x33, "Math_Alphanum"),
    c(0x1D7AE, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL EPSILON", 0x33, "Math_Alphanum"),
    c(0x1D7AF, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL ZETA", 0x33, "Math_Alphanum"),
    c(0x1D7B0, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL ETA", 0x33, "Math_Alphanum"),
    c(0x1D7B1, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL THETA", 0x33, "Math_Alphanum"),
    c(0x1D7B2, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL IOTA", 0x33, "Math_Alphanum"),
    c(0x1D7B3, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL KAPPA", 0x33, "Math_Alphanum"),
    c(0x1D7B4, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL LAMDA", 0x33, "Math_Alphanum"),
    c(0x1D7B5, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL MU", 0x33, "Math_Alphanum"),
    c(0x1D7B6, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL NU", 0x33, "Math_Alphanum"),
    c(0x1D7B7, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL XI", 0x33, "Math_Alphanum"),
    c(0x1D7B8, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL OMICRON", 0x33, "Math_Alphanum"),
    c(0x1D7B9, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL PI", 0x33, "Math_Alphanum"),
    c(0x1D7BA, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL RHO", 0x33, "Math_Alphanum"),
    c(0x1D7BB, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL FINAL SIGMA", 0x33, "Math_Alphanum"),
    c(0x1D7BC, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL SIGMA", 0x33, "Math_Alphanum"),
    c(0x1D7BD, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL TAU", 0x33, "Math_Alphanum"),
    c(0x1D7BE, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL UPSILON", 0x33, "Math_Alphanum"),
    c(0x1D7BF, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL PHI", 0x33, "Math_Alphanum"),
    c(0x1D7C0, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL CHI", 0x33, "Math_Alphanum"),
    c(0x1D7C1, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL PSI", 0x33, "Math_Alphanum"),
    c(0x1D7C2, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL OMEGA", 0x33, "Math_Alphanum"),
    c(0x1D7C3, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC PARTIAL DIFFERENTIAL", 0x02, "Math_Alphanum"),
    c(0x1D7C4, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC EPSILON SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D7C5, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC THETA SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D7C6, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC KAPPA SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D7C7, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC PHI SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D7C8, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC RHO SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D7C9, None, "MATHEMATICAL SANS-SERIF BOLD ITALIC PI SYMBOL", 0x33, "Math_Alphanum"),
    c(0x1D7CA, None, "MATHEMATICAL BOLD CAPITAL DIGAMMA", 0x33, "Math_Alphanum"),
    c(0x1D7CB, None, "MATHEMATICAL BOLD SMALL DIGAMMA", 0x33, "Math_Alphanum"),
    c(0x1D7CE, None, "MATHEMATICAL BOLD DIGIT ZERO", 0x22, "Math_Alphanum"),
    c(0x1D7CF, None, "MATHEMATICAL BOLD DIGIT ONE", 0x22, "Math_Alphanum"),
    c(0x1D7D0, None, "MATHEMATICAL BOLD DIGIT TWO", 0x22, "Math_Alphanum"),
    c(0x1D7D1, None, "MATHEMATICAL BOLD DIGIT THREE", 0x22, "Math_Alphanum"),
    c(0x1D7D2, None, "MATHEMATICAL BOLD DIGIT FOUR", 0x22, "Math_Alphanum"),
    c(0x1D7D3, None, "MATHEMATICAL BOLD DIGIT FIVE", 0x22, "Math_Alphanum"),
    c(0x1D7D4, None, "MATHEMATICAL BOLD DIGIT SIX", 0x22, "Math_Alphanum"),
    c(0x1D7D5, None, "MATHEMATICAL BOLD DIGIT SEVEN", 0x22, "Math_Alphanum"),
    c(0x1D7D6, None, "MATHEMATICAL BOLD DIGIT EIGHT", 0x22, "Math_Alphanum"),
    c(0x1D7D7, None, "MATHEMATICAL BOLD DIGIT NINE", 0x22, "Math_Alphanum"),
    c(0x1D7D8, None, "MATHEMATICAL DOUBLE-STRUCK DIGIT ZERO", 0x22, "Math_Alphanum"),
    c(0x1D7D9, None, "MATHEMATICAL DOUBLE-STRUCK DIGIT ONE", 0x22, "Math_Alphanum"),
    c(0x1D7DA, None, "MATHEMATICAL DOUBLE-STRUCK DIGIT TWO", 0x22, "Math_Alphanum"),
    c(0x1D7DB, None, "MATHEMATICAL DOUBLE-STRUCK DIGIT THREE", 0x22, "Math_Alphanum"),
    c(0x1D7DC, None, "MATHEMATICAL DOUBLE-STRUCK DIGIT FOUR", 0x22, "Math_Alphanum"),
    c(0x1D7DD, None, "MATHEMATICAL DOUBLE-STRUCK DIGIT FIVE", 0x22, "Math_Alphanum"),
    c(0x1D7DE, None, "MATHEMATICAL DOUBLE-STRUCK DIGIT SIX", 0x22, "Math_Alphanum"),
    c(0x1D7DF, None, "MATHEMATICAL DOUBLE-STRUCK DIGIT SEVEN", 0x22, "Math_Alphanum"),
    c(0x1D7E0, None, "MATHEMATICAL DOUBLE-STRUCK DIGIT EIGHT", 0x22, "Math_Alphanum"),
    c(0x1D7E1, None, "MATHEMATICAL DOUBLE-STRUCK DIGIT NINE", 0x22, "Math_Alphanum"),
    c(0x1D7E2, None, "MATHEMATICAL SANS-SERIF DIGIT ZERO", 0x22, "Math_Alphanum"),
    c(0x1D7E3, None, "MATHEMATICAL SANS-SERIF DIGIT ONE", 0x22, "Math_Alphanum"),
    c(0x1D7E4, None, "MATHEMATICAL SANS-SERIF DIGIT TWO", 0x22, "Math_Alphanum"),
    c(0x1D7E5, None, "MATHEMATICAL SANS-SERIF DIGIT THREE", 0x22, "Math_Alphanum"),
    c(0x1D7E6, None, "MATHEMATICAL SANS-SERIF DIGIT FOUR", 0x22, "Math_Alphanum"),
    c(0x1D7E7, None, "MATHEMATICAL SANS-SERIF DIGIT FIVE", 0x22, "Math_Alphanum"),
    c(0x1D7E8, None, "MATHEMATICAL SANS-SERIF DIGIT SIX", 0x22, "Math_Alphanum"),
    c(0x1D7E9, None, "MATHEMATICAL SANS-SERIF DIGIT SEVEN", 0x22, "Math_Alphanum"),
    c(0x1D7EA, None, "MATHEMATICAL SANS-SERIF DIGIT EIGHT", 0x22, "Math_Alphanum"),
    c(0x1D7EB, None, "MATHEMATICAL SANS-SERIF DIGIT NINE", 0x22, "Math_Alphanum"),
    c(0x1D7EC, None, "MATHEMATICAL SANS-SERIF BOLD DIGIT ZERO", 0x22, "Math_Alphanum"),
    c(0x1D7ED, None, "MATHEMATICAL SANS-SERIF BOLD DIGIT ONE", 0x22, "Math_Alphanum"),
    c(0x1D7EE, None, "MATHEMATICAL SANS-SERIF BOLD DIGIT TWO", 0x22, "Math_Alphanum"),
    c(0x1D7EF, None, "MATHEMATICAL SANS-SERIF BOLD DIGIT THREE", 0x22, "Math_Alphanum"),
    c(0x1D7F0, None, "MATHEMATICAL SANS-SERIF BOLD DIGIT FOUR", 0x22, "Math_Alphanum"),
    c(0x1D7F1, None, "MATHEMATICAL SANS-SERIF BOLD DIGIT FIVE", 0x22, "Math_Alphanum"),
    c(0x1D7F2, None, "MATHEMATICAL SANS-SERIF BOLD DIGIT SIX", 0x22, "Math_Alphanum"),
    c(0x1D7F3, None, "MATHEMATICAL SANS-SERIF BOLD DIGIT SEVEN", 0x22, "Math_Alphanum"),
    c(0x1D7F4, None, "MATHEMATICAL SANS-SERIF BOLD DIGIT EIGHT", 0x22, "Math_Alphanum"),
    c(0x1D7F5, None, "MATHEMATICAL SANS-SERIF BOLD DIGIT NINE", 0x22, "Math_Alphanum"),
    c(0x1D7F6, None, "MATHEMATICAL MONOSPACE DIGIT ZERO", 0x22, "Math_Alphanum"),
    c(0x1D7F7, None, "MATHEMATICAL MONOSPACE DIGIT ONE", 0x22, "Math_Alphanum"),
    c(0x1D7F8, None, "MATHEMATICAL MONOSPACE DIGIT TWO", 0x22, "Math_Alphanum"),
    c(0x1D7F9, None, "MATHEMATICAL MONOSPACE DIGIT THREE", 0x22, "Math_Alphanum"),
    c(0x1D7FA, None, "MATHEMATICAL MONOSPACE DIGIT FOUR", 0x22, "Math_Alphanum"),
    c(0x1D7FB, None, "MATHEMATICAL MONOSPACE DIGIT FIVE", 0x22, "Math_Alphanum"),
    c(0x1D7FC, None, "MATHEMATICAL MONOSPACE DIGIT SIX", 0x22, "Math_Alphanum"),
    c(0x1D7FD, None, "MATHEMATICAL MONOSPACE DIGIT SEVEN", 0x22, "Math_Alphanum"),
    c(0x1D7FE, None, "MATHEMATICAL MONOSPACE DIGIT EIGHT", 0x22, "Math_Alphanum"),
    c(0x1D7FF, None, "MATHEMATICAL MONOSPACE DIGIT NINE", 0x22, "Math_Alphanum"),
    c(0x1D800, None, "SIGNWRITING HAND-FIST INDEX", 0x00, "Sutton_SignWriting"),
    c(0x1D801, None, "SIGNWRITING HAND-CIRCLE INDEX", 0x00, "Sutton_SignWriting"),
    c(0x1D802, None, "SIGNWRITING HAND-CUP INDEX", 0x00, "Sutton_SignWriting"),
    c(0x1D803, None, "SIGNWRITING HAND-OVAL INDEX", 0x00, "Sutton_SignWriting"),
    c(0x1D804, None, "SIGNWRITING HAND-HINGE INDEX", 0x00, "Sutton_SignWriting"),
    c(0x1D805, None, "SIGNWRITING HAND-ANGLE INDEX", 0x00, "Sutton_SignWriting"),
    c(0x1D806, None, "SIGNWRITING HAND-FIST INDEX BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D807, None, "SIGNWRITING HAND-CIRCLE INDEX BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D808, None, "SIGNWRITING HAND-FIST THUMB UNDER INDEX BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D809, None, "SIGNWRITING HAND-FIST INDEX RAISED KNUCKLE", 0x00, "Sutton_SignWriting"),
    c(0x1D80A, None, "SIGNWRITING HAND-FIST INDEX CUPPED", 0x00, "Sutton_SignWriting"),
    c(0x1D80B, None, "SIGNWRITING HAND-FIST INDEX HINGED", 0x00, "Sutton_SignWriting"),
    c(0x1D80C, None, "SIGNWRITING HAND-FIST INDEX HINGED LOW", 0x00, "Sutton_SignWriting"),
    c(0x1D80D, None, "SIGNWRITING HAND-CIRCLE INDEX HINGE", 0x00, "Sutton_SignWriting"),
    c(0x1D80E, None, "SIGNWRITING HAND-FIST INDEX MIDDLE", 0x00, "Sutton_SignWriting"),
    c(0x1D80F, None, "SIGNWRITING HAND-CIRCLE INDEX MIDDLE", 0x00, "Sutton_SignWriting"),
    c(0x1D810, None, "SIGNWRITING HAND-FIST INDEX MIDDLE BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D811, None, "SIGNWRITING HAND-FIST INDEX MIDDLE RAISED KNUCKLES", 0x00, "Sutton_SignWriting"),
    c(0x1D812, None, "SIGNWRITING HAND-FIST INDEX MIDDLE HINGED", 0x00, "Sutton_SignWriting"),
    c(0x1D813, None, "SIGNWRITING HAND-FIST INDEX UP MIDDLE HINGED", 0x00, "Sutton_SignWriting"),
    c(0x1D814, None, "SIGNWRITING HAND-FIST INDEX HINGED MIDDLE UP", 0x00, "Sutton_SignWriting"),
    c(0x1D815, None, "SIGNWRITING HAND-FIST INDEX MIDDLE CONJOINED", 0x00, "Sutton_SignWriting"),
    c(0x1D816, None, "SIGNWRITING HAND-FIST INDEX MIDDLE CONJOINED INDEX BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D817, None, "SIGNWRITING HAND-FIST INDEX MIDDLE CONJOINED MIDDLE BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D818, None, "SIGNWRITING HAND-FIST INDEX MIDDLE CONJOINED CUPPED", 0x00, "Sutton_SignWriting"),
    c(0x1D819, None, "SIGNWRITING HAND-FIST INDEX MIDDLE CONJOINED HINGED", 0x00, "Sutton_SignWriting"),
    c(0x1D81A, None, "SIGNWRITING HAND-FIST INDEX MIDDLE CROSSED", 0x00, "Sutton_SignWriting"),
    c(0x1D81B, None, "SIGNWRITING HAND-CIRCLE INDEX MIDDLE CROSSED", 0x00, "Sutton_SignWriting"),
    c(0x1D81C, None, "SIGNWRITING HAND-FIST MIDDLE BENT OVER INDEX", 0x00, "Sutton_SignWriting"),
    c(0x1D81D, None, "SIGNWRITING HAND-FIST INDEX BENT OVER MIDDLE", 0x00, "Sutton_SignWriting"),
    c(0x1D81E, None, "SIGNWRITING HAND-FIST INDEX MIDDLE THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D81F, None, "SIGNWRITING HAND-CIRCLE INDEX MIDDLE THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D820, None, "SIGNWRITING HAND-FIST INDEX MIDDLE STRAIGHT THUMB BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D821, None, "SIGNWRITING HAND-FIST INDEX MIDDLE BENT THUMB STRAIGHT", 0x00, "Sutton_SignWriting"),
    c(0x1D822, None, "SIGNWRITING HAND-FIST INDEX MIDDLE THUMB BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D823, None, "SIGNWRITING HAND-FIST INDEX MIDDLE HINGED SPREAD THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D824, None, "SIGNWRITING HAND-FIST INDEX UP MIDDLE HINGED THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D825, None, "SIGNWRITING HAND-FIST INDEX UP MIDDLE HINGED THUMB CONJOINED", 0x00, "Sutton_SignWriting"),
    c(0x1D826, None, "SIGNWRITING HAND-FIST INDEX HINGED MIDDLE UP THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D827, None, "SIGNWRITING HAND-FIST INDEX MIDDLE UP SPREAD THUMB FORWARD", 0x00, "Sutton_SignWriting"),
    c(0x1D828, None, "SIGNWRITING HAND-FIST INDEX MIDDLE THUMB CUPPED", 0x00, "Sutton_SignWriting"),
    c(0x1D829, None, "SIGNWRITING HAND-FIST INDEX MIDDLE THUMB CIRCLED", 0x00, "Sutton_SignWriting"),
    c(0x1D82A, None, "SIGNWRITING HAND-FIST INDEX MIDDLE THUMB HOOKED", 0x00, "Sutton_SignWriting"),
    c(0x1D82B, None, "SIGNWRITING HAND-FIST INDEX MIDDLE THUMB HINGED", 0x00, "Sutton_SignWriting"),
    c(0x1D82C, None, "SIGNWRITING HAND-FIST THUMB BETWEEN INDEX MIDDLE STRAIGHT", 0x00, "Sutton_SignWriting"),
    c(0x1D82D, None, "SIGNWRITING HAND-FIST INDEX MIDDLE CONJOINED THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D82E, None, "SIGNWRITING HAND-FIST INDEX MIDDLE CONJOINED THUMB SIDE CONJOINED", 0x00, "Sutton_SignWriting"),
    c(0x1D82F, None, "SIGNWRITING HAND-FIST INDEX MIDDLE CONJOINED THUMB SIDE BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D830, None, "SIGNWRITING HAND-FIST MIDDLE THUMB HOOKED INDEX UP", 0x00, "Sutton_SignWriting"),
    c(0x1D831, None, "SIGNWRITING HAND-FIST INDEX THUMB HOOKED MIDDLE UP", 0x00, "Sutton_SignWriting"),
    c(0x1D832, None, "SIGNWRITING HAND-FIST INDEX MIDDLE CONJOINED HINGED THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D833, None, "SIGNWRITING HAND-FIST INDEX MIDDLE CROSSED THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D834, None, "SIGNWRITING HAND-FIST INDEX MIDDLE CONJOINED THUMB FORWARD", 0x00, "Sutton_SignWriting"),
    c(0x1D835, None, "SIGNWRITING HAND-FIST INDEX MIDDLE CONJOINED CUPPED THUMB FORWARD", 0x00, "Sutton_SignWriting"),
    c(0x1D836, None, "SIGNWRITING HAND-FIST MIDDLE THUMB CUPPED INDEX UP", 0x00, "Sutton_SignWriting"),
    c(0x1D837, None, "SIGNWRITING HAND-FIST INDEX THUMB CUPPED MIDDLE UP", 0x00, "Sutton_SignWriting"),
    c(0x1D838, None, "SIGNWRITING HAND-FIST MIDDLE THUMB CIRCLED INDEX UP", 0x00, "Sutton_SignWriting"),
    c(0x1D839, None, "SIGNWRITING HAND-FIST MIDDLE THUMB CIRCLED INDEX HINGED", 0x00, "Sutton_SignWriting"),
    c(0x1D83A, None, "SIGNWRITING HAND-FIST INDEX THUMB ANGLED OUT MIDDLE UP", 0x00, "Sutton_SignWriting"),
    c(0x1D83B, None, "SIGNWRITING HAND-FIST INDEX THUMB ANGLED IN MIDDLE UP", 0x00, "Sutton_SignWriting"),
    c(0x1D83C, None, "SIGNWRITING HAND-FIST INDEX THUMB CIRCLED MIDDLE UP", 0x00, "Sutton_SignWriting"),
    c(0x1D83D, None, "SIGNWRITING HAND-FIST INDEX MIDDLE THUMB CONJOINED HINGED", 0x00, "Sutton_SignWriting"),
    c(0x1D83E, None, "SIGNWRITING HAND-FIST INDEX MIDDLE THUMB ANGLED OUT", 0x00, "Sutton_SignWriting"),
    c(0x1D83F, None, "SIGNWRITING HAND-FIST INDEX MIDDLE THUMB ANGLED", 0x00, "Sutton_SignWriting"),
    c(0x1D840, None, "SIGNWRITING HAND-FIST MIDDLE THUMB ANGLED OUT INDEX UP", 0x00, "Sutton_SignWriting"),
    c(0x1D841, None, "SIGNWRITING HAND-FIST MIDDLE THUMB ANGLED OUT INDEX CROSSED", 0x00, "Sutton_SignWriting"),
    c(0x1D842, None, "SIGNWRITING HAND-FIST MIDDLE THUMB ANGLED INDEX UP", 0x00, "Sutton_SignWriting"),
    c(0x1D843, None, "SIGNWRITING HAND-FIST INDEX THUMB HOOKED MIDDLE HINGED", 0x00, "Sutton_SignWriting"),
    c(0x1D844, None, "SIGNWRITING HAND-FLAT FOUR FINGERS", 0x00, "Sutton_SignWriting"),
    c(0x1D845, None, "SIGNWRITING HAND-FLAT FOUR FINGERS BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D846, None, "SIGNWRITING HAND-FLAT FOUR FINGERS HINGED", 0x00, "Sutton_SignWriting"),
    c(0x1D847, None, "SIGNWRITING HAND-FLAT FOUR FINGERS CONJOINED", 0x00, "Sutton_SignWriting"),
    c(0x1D848, None, "SIGNWRITING HAND-FLAT FOUR FINGERS CONJOINED SPLIT", 0x00, "Sutton_SignWriting"),
    c(0x1D849, None, "SIGNWRITING HAND-CLAW FOUR FINGERS CONJOINED", 0x00, "Sutton_SignWriting"),
    c(0x1D84A, None, "SIGNWRITING HAND-FIST FOUR FINGERS CONJOINED BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D84B, None, "SIGNWRITING HAND-HINGE FOUR FINGERS CONJOINED", 0x00, "Sutton_SignWriting"),
    c(0x1D84C, None, "SIGNWRITING HAND-FLAT FIVE FINGERS SPREAD", 0x00, "Sutton_SignWriting"),
    c(0x1D84D, None, "SIGNWRITING HAND-FLAT HEEL FIVE FINGERS SPREAD", 0x00, "Sutton_SignWriting"),
    c(0x1D84E, None, "SIGNWRITING HAND-FLAT FIVE FINGERS SPREAD FOUR BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D84F, None, "SIGNWRITING HAND-FLAT HEEL FIVE FINGERS SPREAD FOUR BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D850, None, "SIGNWRITING HAND-FLAT FIVE FINGERS SPREAD BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D851, None, "SIGNWRITING HAND-FLAT HEEL FIVE FINGERS SPREAD BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D852, None, "SIGNWRITING HAND-FLAT FIVE FINGERS SPREAD THUMB FORWARD", 0x00, "Sutton_SignWriting"),
    c(0x1D853, None, "SIGNWRITING HAND-CUP FIVE FINGERS SPREAD", 0x00, "Sutton_SignWriting"),
    c(0x1D854, None, "SIGNWRITING HAND-CUP FIVE FINGERS SPREAD OPEN", 0x00, "Sutton_SignWriting"),
    c(0x1D855, None, "SIGNWRITING HAND-HINGE FIVE FINGERS SPREAD OPEN", 0x00, "Sutton_SignWriting"),
    c(0x1D856, None, "SIGNWRITING HAND-OVAL FIVE FINGERS SPREAD", 0x00, "Sutton_SignWriting"),
    c(0x1D857, None, "SIGNWRITING HAND-FLAT FIVE FINGERS SPREAD HINGED", 0x00, "Sutton_SignWriting"),
    c(0x1D858, None, "SIGNWRITING HAND-FLAT FIVE FINGERS SPREAD HINGED THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D859, None, "SIGNWRITING HAND-FLAT FIVE FINGERS SPREAD HINGED NO THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D85A, None, "SIGNWRITING HAND-FLAT", 0x00, "Sutton_SignWriting"),
    c(0x1D85B, None, "SIGNWRITING HAND-FLAT BETWEEN PALM FACINGS", 0x00, "Sutton_SignWriting"),
    c(0x1D85C, None, "SIGNWRITING HAND-FLAT HEEL", 0x00, "Sutton_SignWriting"),
    c(0x1D85D, None, "SIGNWRITING HAND-FLAT THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D85E, None, "SIGNWRITING HAND-FLAT HEEL THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D85F, None, "SIGNWRITING HAND-FLAT THUMB BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D860, None, "SIGNWRITING HAND-FLAT THUMB FORWARD", 0x00, "Sutton_SignWriting"),
    c(0x1D861, None, "SIGNWRITING HAND-FLAT SPLIT INDEX THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D862, None, "SIGNWRITING HAND-FLAT SPLIT CENTRE", 0x00, "Sutton_SignWriting"),
    c(0x1D863, None, "SIGNWRITING HAND-FLAT SPLIT CENTRE THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D864, None, "SIGNWRITING HAND-FLAT SPLIT CENTRE THUMB SIDE BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D865, None, "SIGNWRITING HAND-FLAT SPLIT LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D866, None, "SIGNWRITING HAND-CLAW", 0x00, "Sutton_SignWriting"),
    c(0x1D867, None, "SIGNWRITING HAND-CLAW THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D868, None, "SIGNWRITING HAND-CLAW NO THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D869, None, "SIGNWRITING HAND-CLAW THUMB FORWARD", 0x00, "Sutton_SignWriting"),
    c(0x1D86A, None, "SIGNWRITING HAND-HOOK CURLICUE", 0x00, "Sutton_SignWriting"),
    c(0x1D86B, None, "SIGNWRITING HAND-HOOK", 0x00, "Sutton_SignWriting"),
    c(0x1D86C, None, "SIGNWRITING HAND-CUP OPEN", 0x00, "Sutton_SignWriting"),
    c(0x1D86D, None, "SIGNWRITING HAND-CUP", 0x00, "Sutton_SignWriting"),
    c(0x1D86E, None, "SIGNWRITING HAND-CUP OPEN THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D86F, None, "SIGNWRITING HAND-CUP THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D870, None, "SIGNWRITING HAND-CUP OPEN NO THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D871, None, "SIGNWRITING HAND-CUP NO THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D872, None, "SIGNWRITING HAND-CUP OPEN THUMB FORWARD", 0x00, "Sutton_SignWriting"),
    c(0x1D873, None, "SIGNWRITING HAND-CUP THUMB FORWARD", 0x00, "Sutton_SignWriting"),
    c(0x1D874, None, "SIGNWRITING HAND-CURLICUE OPEN", 0x00, "Sutton_SignWriting"),
    c(0x1D875, None, "SIGNWRITING HAND-CURLICUE", 0x00, "Sutton_SignWriting"),
    c(0x1D876, None, "SIGNWRITING HAND-CIRCLE", 0x00, "Sutton_SignWriting"),
    c(0x1D877, None, "SIGNWRITING HAND-OVAL", 0x00, "Sutton_SignWriting"),
    c(0x1D878, None, "SIGNWRITING HAND-OVAL THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D879, None, "SIGNWRITING HAND-OVAL NO THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D87A, None, "SIGNWRITING HAND-OVAL THUMB FORWARD", 0x00, "Sutton_SignWriting"),
    c(0x1D87B, None, "SIGNWRITING HAND-HINGE OPEN", 0x00, "Sutton_SignWriting"),
    c(0x1D87C, None, "SIGNWRITING HAND-HINGE OPEN THUMB FORWARD", 0x00, "Sutton_SignWriting"),
    c(0x1D87D, None, "SIGNWRITING HAND-HINGE", 0x00, "Sutton_SignWriting"),
    c(0x1D87E, None, "SIGNWRITING HAND-HINGE SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D87F, None, "SIGNWRITING HAND-HINGE OPEN THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D880, None, "SIGNWRITING HAND-HINGE THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D881, None, "SIGNWRITING HAND-HINGE OPEN NO THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D882, None, "SIGNWRITING HAND-HINGE NO THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D883, None, "SIGNWRITING HAND-HINGE THUMB SIDE TOUCHING INDEX", 0x00, "Sutton_SignWriting"),
    c(0x1D884, None, "SIGNWRITING HAND-HINGE THUMB BETWEEN MIDDLE RING", 0x00, "Sutton_SignWriting"),
    c(0x1D885, None, "SIGNWRITING HAND-ANGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D886, None, "SIGNWRITING HAND-FIST INDEX MIDDLE RING", 0x00, "Sutton_SignWriting"),
    c(0x1D887, None, "SIGNWRITING HAND-CIRCLE INDEX MIDDLE RING", 0x00, "Sutton_SignWriting"),
    c(0x1D888, None, "SIGNWRITING HAND-HINGE INDEX MIDDLE RING", 0x00, "Sutton_SignWriting"),
    c(0x1D889, None, "SIGNWRITING HAND-ANGLE INDEX MIDDLE RING", 0x00, "Sutton_SignWriting"),
    c(0x1D88A, None, "SIGNWRITING HAND-HINGE LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D88B, None, "SIGNWRITING HAND-FIST INDEX MIDDLE RING BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D88C, None, "SIGNWRITING HAND-FIST INDEX MIDDLE RING CONJOINED", 0x00, "Sutton_SignWriting"),
    c(0x1D88D, None, "SIGNWRITING HAND-HINGE INDEX MIDDLE RING CONJOINED", 0x00, "Sutton_SignWriting"),
    c(0x1D88E, None, "SIGNWRITING HAND-FIST LITTLE DOWN", 0x00, "Sutton_SignWriting"),
    c(0x1D88F, None, "SIGNWRITING HAND-FIST LITTLE DOWN RIPPLE STRAIGHT", 0x00, "Sutton_SignWriting"),
    c(0x1D890, None, "SIGNWRITING HAND-FIST LITTLE DOWN RIPPLE CURVED", 0x00, "Sutton_SignWriting"),
    c(0x1D891, None, "SIGNWRITING HAND-FIST LITTLE DOWN OTHERS CIRCLED", 0x00, "Sutton_SignWriting"),
    c(0x1D892, None, "SIGNWRITING HAND-FIST LITTLE UP", 0x00, "Sutton_SignWriting"),
    c(0x1D893, None, "SIGNWRITING HAND-FIST THUMB UNDER LITTLE UP", 0x00, "Sutton_SignWriting"),
    c(0x1D894, None, "SIGNWRITING HAND-CIRCLE LITTLE UP", 0x00, "Sutton_SignWriting"),
    c(0x1D895, None, "SIGNWRITING HAND-OVAL LITTLE UP", 0x00, "Sutton_SignWriting"),
    c(0x1D896, None, "SIGNWRITING HAND-ANGLE LITTLE UP", 0x00, "Sutton_SignWriting"),
    c(0x1D897, None, "SIGNWRITING HAND-FIST LITTLE RAISED KNUCKLE", 0x00, "Sutton_SignWriting"),
    c(0x1D898, None, "SIGNWRITING HAND-FIST LITTLE BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D899, None, "SIGNWRITING HAND-FIST LITTLE TOUCHES THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D89A, None, "SIGNWRITING HAND-FIST LITTLE THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D89B, None, "SIGNWRITING HAND-HINGE LITTLE THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D89C, None, "SIGNWRITING HAND-FIST LITTLE INDEX THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D89D, None, "SIGNWRITING HAND-HINGE LITTLE INDEX THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D89E, None, "SIGNWRITING HAND-ANGLE LITTLE INDEX THUMB INDEX THUMB OUT", 0x00, "Sutton_SignWriting"),
    c(0x1D89F, None, "SIGNWRITING HAND-ANGLE LITTLE INDEX THUMB INDEX THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D8A0, None, "SIGNWRITING HAND-FIST LITTLE INDEX", 0x00, "Sutton_SignWriting"),
    c(0x1D8A1, None, "SIGNWRITING HAND-CIRCLE LITTLE INDEX", 0x00, "Sutton_SignWriting"),
    c(0x1D8A2, None, "SIGNWRITING HAND-HINGE LITTLE INDEX", 0x00, "Sutton_SignWriting"),
    c(0x1D8A3, None, "SIGNWRITING HAND-ANGLE LITTLE INDEX", 0x00, "Sutton_SignWriting"),
    c(0x1D8A4, None, "SIGNWRITING HAND-FIST INDEX MIDDLE LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8A5, None, "SIGNWRITING HAND-CIRCLE INDEX MIDDLE LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8A6, None, "SIGNWRITING HAND-HINGE INDEX MIDDLE LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8A7, None, "SIGNWRITING HAND-HINGE RING", 0x00, "Sutton_SignWriting"),
    c(0x1D8A8, None, "SIGNWRITING HAND-ANGLE INDEX MIDDLE LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8A9, None, "SIGNWRITING HAND-FIST INDEX MIDDLE CROSS LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8AA, None, "SIGNWRITING HAND-CIRCLE INDEX MIDDLE CROSS LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8AB, None, "SIGNWRITING HAND-FIST RING DOWN", 0x00, "Sutton_SignWriting"),
    c(0x1D8AC, None, "SIGNWRITING HAND-HINGE RING DOWN INDEX THUMB HOOK MIDDLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8AD, None, "SIGNWRITING HAND-ANGLE RING DOWN MIDDLE THUMB INDEX CROSS", 0x00, "Sutton_SignWriting"),
    c(0x1D8AE, None, "SIGNWRITING HAND-FIST RING UP", 0x00, "Sutton_SignWriting"),
    c(0x1D8AF, None, "SIGNWRITING HAND-FIST RING RAISED KNUCKLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8B0, None, "SIGNWRITING HAND-FIST RING LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8B1, None, "SIGNWRITING HAND-CIRCLE RING LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8B2, None, "SIGNWRITING HAND-OVAL RING LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8B3, None, "SIGNWRITING HAND-ANGLE RING LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8B4, None, "SIGNWRITING HAND-FIST RING MIDDLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8B5, None, "SIGNWRITING HAND-FIST RING MIDDLE CONJOINED", 0x00, "Sutton_SignWriting"),
    c(0x1D8B6, None, "SIGNWRITING HAND-FIST RING MIDDLE RAISED KNUCKLES", 0x00, "Sutton_SignWriting"),
    c(0x1D8B7, None, "SIGNWRITING HAND-FIST RING INDEX", 0x00, "Sutton_SignWriting"),
    c(0x1D8B8, None, "SIGNWRITING HAND-FIST RING THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D8B9, None, "SIGNWRITING HAND-HOOK RING THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D8BA, None, "SIGNWRITING HAND-FIST INDEX RING LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8BB, None, "SIGNWRITING HAND-CIRCLE INDEX RING LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8BC, None, "SIGNWRITING HAND-CURLICUE INDEX RING LITTLE ON", 0x00, "Sutton_SignWriting"),
    c(0x1D8BD, None, "SIGNWRITING HAND-HOOK INDEX RING LITTLE OUT", 0x00, "Sutton_SignWriting"),
    c(0x1D8BE, None, "SIGNWRITING HAND-HOOK INDEX RING LITTLE IN", 0x00, "Sutton_SignWriting"),
    c(0x1D8BF, None, "SIGNWRITING HAND-HOOK INDEX RING LITTLE UNDER", 0x00, "Sutton_SignWriting"),
    c(0x1D8C0, None, "SIGNWRITING HAND-CUP INDEX RING LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8C1, None, "SIGNWRITING HAND-HINGE INDEX RING LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8C2, None, "SIGNWRITING HAND-ANGLE INDEX RING LITTLE OUT", 0x00, "Sutton_SignWriting"),
    c(0x1D8C3, None, "SIGNWRITING HAND-ANGLE INDEX RING LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8C4, None, "SIGNWRITING HAND-FIST MIDDLE DOWN", 0x00, "Sutton_SignWriting"),
    c(0x1D8C5, None, "SIGNWRITING HAND-HINGE MIDDLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8C6, None, "SIGNWRITING HAND-FIST MIDDLE UP", 0x00, "Sutton_SignWriting"),
    c(0x1D8C7, None, "SIGNWRITING HAND-CIRCLE MIDDLE UP", 0x00, "Sutton_SignWriting"),
    c(0x1D8C8, None, "SIGNWRITING HAND-FIST MIDDLE RAISED KNUCKLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8C9, None, "SIGNWRITING HAND-FIST MIDDLE UP THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D8CA, None, "SIGNWRITING HAND-HOOK MIDDLE THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D8CB, None, "SIGNWRITING HAND-FIST MIDDLE THUMB LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8CC, None, "SIGNWRITING HAND-FIST MIDDLE LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8CD, None, "SIGNWRITING HAND-FIST MIDDLE RING LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8CE, None, "SIGNWRITING HAND-CIRCLE MIDDLE RING LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8CF, None, "SIGNWRITING HAND-CURLICUE MIDDLE RING LITTLE ON", 0x00, "Sutton_SignWriting"),
    c(0x1D8D0, None, "SIGNWRITING HAND-CUP MIDDLE RING LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8D1, None, "SIGNWRITING HAND-HINGE MIDDLE RING LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8D2, None, "SIGNWRITING HAND-ANGLE MIDDLE RING LITTLE OUT", 0x00, "Sutton_SignWriting"),
    c(0x1D8D3, None, "SIGNWRITING HAND-ANGLE MIDDLE RING LITTLE IN", 0x00, "Sutton_SignWriting"),
    c(0x1D8D4, None, "SIGNWRITING HAND-ANGLE MIDDLE RING LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8D5, None, "SIGNWRITING HAND-CIRCLE MIDDLE RING LITTLE BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D8D6, None, "SIGNWRITING HAND-CLAW MIDDLE RING LITTLE CONJOINED", 0x00, "Sutton_SignWriting"),
    c(0x1D8D7, None, "SIGNWRITING HAND-CLAW MIDDLE RING LITTLE CONJOINED SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D8D8, None, "SIGNWRITING HAND-HOOK MIDDLE RING LITTLE CONJOINED OUT", 0x00, "Sutton_SignWriting"),
    c(0x1D8D9, None, "SIGNWRITING HAND-HOOK MIDDLE RING LITTLE CONJOINED IN", 0x00, "Sutton_SignWriting"),
    c(0x1D8DA, None, "SIGNWRITING HAND-HOOK MIDDLE RING LITTLE CONJOINED", 0x00, "Sutton_SignWriting"),
    c(0x1D8DB, None, "SIGNWRITING HAND-HINGE INDEX HINGED", 0x00, "Sutton_SignWriting"),
    c(0x1D8DC, None, "SIGNWRITING HAND-FIST INDEX THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D8DD, None, "SIGNWRITING HAND-HINGE INDEX THUMB SIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D8DE, None, "SIGNWRITING HAND-FIST INDEX THUMB SIDE THUMB DIAGONAL", 0x00, "Sutton_SignWriting"),
    c(0x1D8DF, None, "SIGNWRITING HAND-FIST INDEX THUMB SIDE THUMB CONJOINED", 0x00, "Sutton_SignWriting"),
    c(0x1D8E0, None, "SIGNWRITING HAND-FIST INDEX THUMB SIDE THUMB BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D8E1, None, "SIGNWRITING HAND-FIST INDEX THUMB SIDE INDEX BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D8E2, None, "SIGNWRITING HAND-FIST INDEX THUMB SIDE BOTH BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D8E3, None, "SIGNWRITING HAND-FIST INDEX THUMB SIDE INDEX HINGE", 0x00, "Sutton_SignWriting"),
    c(0x1D8E4, None, "SIGNWRITING HAND-FIST INDEX THUMB FORWARD INDEX STRAIGHT", 0x00, "Sutton_SignWriting"),
    c(0x1D8E5, None, "SIGNWRITING HAND-FIST INDEX THUMB FORWARD INDEX BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D8E6, None, "SIGNWRITING HAND-FIST INDEX THUMB HOOK", 0x00, "Sutton_SignWriting"),
    c(0x1D8E7, None, "SIGNWRITING HAND-FIST INDEX THUMB CURLICUE", 0x00, "Sutton_SignWriting"),
    c(0x1D8E8, None, "SIGNWRITING HAND-FIST INDEX THUMB CURVE THUMB INSIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D8E9, None, "SIGNWRITING HAND-CLAW INDEX THUMB CURVE THUMB INSIDE", 0x00, "Sutton_SignWriting"),
    c(0x1D8EA, None, "SIGNWRITING HAND-FIST INDEX THUMB CURVE THUMB UNDER", 0x00, "Sutton_SignWriting"),
    c(0x1D8EB, None, "SIGNWRITING HAND-FIST INDEX THUMB CIRCLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8EC, None, "SIGNWRITING HAND-CUP INDEX THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D8ED, None, "SIGNWRITING HAND-CUP INDEX THUMB OPEN", 0x00, "Sutton_SignWriting"),
    c(0x1D8EE, None, "SIGNWRITING HAND-HINGE INDEX THUMB OPEN", 0x00, "Sutton_SignWriting"),
    c(0x1D8EF, None, "SIGNWRITING HAND-HINGE INDEX THUMB LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D8F0, None, "SIGNWRITING HAND-HINGE INDEX THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D8F1, None, "SIGNWRITING HAND-HINGE INDEX THUMB SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D8F2, None, "SIGNWRITING HAND-ANGLE INDEX THUMB OUT", 0x00, "Sutton_SignWriting"),
    c(0x1D8F3, None, "SIGNWRITING HAND-ANGLE INDEX THUMB IN", 0x00, "Sutton_SignWriting"),
    c(0x1D8F4, None, "SIGNWRITING HAND-ANGLE INDEX THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D8F5, None, "SIGNWRITING HAND-FIST THUMB", 0x00, "Sutton_SignWriting"),
    c(0x1D8F6, None, "SIGNWRITING HAND-FIST THUMB HEEL", 0x00, "Sutton_SignWriting"),
    c(0x1D8F7, None, "SIGNWRITING HAND-FIST THUMB SIDE DIAGONAL", 0x00, "Sutton_SignWriting"),
    c(0x1D8F8, None, "SIGNWRITING HAND-FIST THUMB SIDE CONJOINED", 0x00, "Sutton_SignWriting"),
    c(0x1D8F9, None, "SIGNWRITING HAND-FIST THUMB SIDE BENT", 0x00, "Sutton_SignWriting"),
    c(0x1D8FA, None, "SIGNWRITING HAND-FIST THUMB FORWARD", 0x00, "Sutton_SignWriting"),
    c(0x1D8FB, None, "SIGNWRITING HAND-FIST THUMB BETWEEN INDEX MIDDLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8FC, None, "SIGNWRITING HAND-FIST THUMB BETWEEN MIDDLE RING", 0x00, "Sutton_SignWriting"),
    c(0x1D8FD, None, "SIGNWRITING HAND-FIST THUMB BETWEEN RING LITTLE", 0x00, "Sutton_SignWriting"),
    c(0x1D8FE, None, "SIGNWRITING HAND-FIST THUMB UNDER TWO FINGERS", 0x00, "Sutton_SignWriting"),
    c(0x1D8FF, None, "SIGNWRITING HAND-FIST THUMB OVER TWO FINGERS", 0x00, "Sutton_SignWriting"),
    c(0x1D900, None, "SIGNWRITING HAND-FIST THUMB UNDER THREE FINGERS", 0x00, "Sutton_SignWriting"),
    c(0x1D901, None, "SIGNWRITING HAND-FIST THUMB UNDER FOUR FINGERS", 0x00, "Sutton_SignWriting"),
    c(0x1D902, None, "SIGNWRITING HAND-FIST THUMB OVER FOUR RAISED KNUCKLES", 0x00, "Sutton_SignWriting"),
    c(0x1D903, None, "SIGNWRITING HAND-FIST", 0x00, "Sutton_SignWriting"),
    c(0x1D904, None, "SIGNWRITING HAND-FIST HEEL", 0x00, "Sutton_SignWriting"),
    c(0x1D905, None, "SIGNWRITING TOUCH SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D906, None, "SIGNWRITING TOUCH MULTIPLE", 0x00, "Sutton_SignWriting"),
    c(0x1D907, None, "SIGNWRITING TOUCH BETWEEN", 0x00, "Sutton_SignWriting"),
    c(0x1D908, None, "SIGNWRITING GRASP SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D909, None, "SIGNWRITING GRASP MULTIPLE", 0x00, "Sutton_SignWriting"),
    c(0x1D90A, None, "SIGNWRITING GRASP BETWEEN", 0x00, "Sutton_SignWriting"),
    c(0x1D90B, None, "SIGNWRITING STRIKE SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D90C, None, "SIGNWRITING STRIKE MULTIPLE", 0x00, "Sutton_SignWriting"),
    c(0x1D90D, None, "SIGNWRITING STRIKE BETWEEN", 0x00, "Sutton_SignWriting"),
    c(0x1D90E, None, "SIGNWRITING BRUSH SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D90F, None, "SIGNWRITING BRUSH MULTIPLE", 0x00, "Sutton_SignWriting"),
    c(0x1D910, None, "SIGNWRITING BRUSH BETWEEN", 0x00, "Sutton_SignWriting"),
    c(0x1D911, None, "SIGNWRITING RUB SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D912, None, "SIGNWRITING RUB MULTIPLE", 0x00, "Sutton_SignWriting"),
    c(0x1D913, None, "SIGNWRITING RUB BETWEEN", 0x00, "Sutton_SignWriting"),
    c(0x1D914, None, "SIGNWRITING SURFACE SYMBOLS", 0x00, "Sutton_SignWriting"),
    c(0x1D915, None, "SIGNWRITING SURFACE BETWEEN", 0x00, "Sutton_SignWriting"),
    c(0x1D916, None, "SIGNWRITING SQUEEZE LARGE SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D917, None, "SIGNWRITING SQUEEZE SMALL SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D918, None, "SIGNWRITING SQUEEZE LARGE MULTIPLE", 0x00, "Sutton_SignWriting"),
    c(0x1D919, None, "SIGNWRITING SQUEEZE SMALL MULTIPLE", 0x00, "Sutton_SignWriting"),
    c(0x1D91A, None, "SIGNWRITING SQUEEZE SEQUENTIAL", 0x00, "Sutton_SignWriting"),
    c(0x1D91B, None, "SIGNWRITING FLICK LARGE SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D91C, None, "SIGNWRITING FLICK SMALL SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D91D, None, "SIGNWRITING FLICK LARGE MULTIPLE", 0x00, "Sutton_SignWriting"),
    c(0x1D91E, None, "SIGNWRITING FLICK SMALL MULTIPLE", 0x00, "Sutton_SignWriting"),
    c(0x1D91F, None, "SIGNWRITING FLICK SEQUENTIAL", 0x00, "Sutton_SignWriting"),
    c(0x1D920, None, "SIGNWRITING SQUEEZE FLICK ALTERNATING", 0x00, "Sutton_SignWriting"),
    c(0x1D921, None, "SIGNWRITING MOVEMENT-HINGE UP DOWN LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D922, None, "SIGNWRITING MOVEMENT-HINGE UP DOWN SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D923, None, "SIGNWRITING MOVEMENT-HINGE UP SEQUENTIAL", 0x00, "Sutton_SignWriting"),
    c(0x1D924, None, "SIGNWRITING MOVEMENT-HINGE DOWN SEQUENTIAL", 0x00, "Sutton_SignWriting"),
    c(0x1D925, None, "SIGNWRITING MOVEMENT-HINGE UP DOWN ALTERNATING LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D926, None, "SIGNWRITING MOVEMENT-HINGE UP DOWN ALTERNATING SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D927, None, "SIGNWRITING MOVEMENT-HINGE SIDE TO SIDE SCISSORS", 0x00, "Sutton_SignWriting"),
    c(0x1D928, None, "SIGNWRITING MOVEMENT-WALLPLANE FINGER CONTACT", 0x00, "Sutton_SignWriting"),
    c(0x1D929, None, "SIGNWRITING MOVEMENT-FLOORPLANE FINGER CONTACT", 0x00, "Sutton_SignWriting"),
    c(0x1D92A, None, "SIGNWRITING MOVEMENT-WALLPLANE SINGLE STRAIGHT SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D92B, None, "SIGNWRITING MOVEMENT-WALLPLANE SINGLE STRAIGHT MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D92C, None, "SIGNWRITING MOVEMENT-WALLPLANE SINGLE STRAIGHT LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D92D, None, "SIGNWRITING MOVEMENT-WALLPLANE SINGLE STRAIGHT LARGEST", 0x00, "Sutton_SignWriting"),
    c(0x1D92E, None, "SIGNWRITING MOVEMENT-WALLPLANE SINGLE WRIST FLEX", 0x00, "Sutton_SignWriting"),
    c(0x1D92F, None, "SIGNWRITING MOVEMENT-WALLPLANE DOUBLE STRAIGHT", 0x00, "Sutton_SignWriting"),
    c(0x1D930, None, "SIGNWRITING MOVEMENT-WALLPLANE DOUBLE WRIST FLEX", 0x00, "Sutton_SignWriting"),
    c(0x1D931, None, "SIGNWRITING MOVEMENT-WALLPLANE DOUBLE ALTERNATING", 0x00, "Sutton_SignWriting"),
    c(0x1D932, None, "SIGNWRITING MOVEMENT-WALLPLANE DOUBLE ALTERNATING WRIST FLEX", 0x00, "Sutton_SignWriting"),
    c(0x1D933, None, "SIGNWRITING MOVEMENT-WALLPLANE CROSS", 0x00, "Sutton_SignWriting"),
    c(0x1D934, None, "SIGNWRITING MOVEMENT-WALLPLANE TRIPLE STRAIGHT MOVEMENT", 0x00, "Sutton_SignWriting"),
    c(0x1D935, None, "SIGNWRITING MOVEMENT-WALLPLANE TRIPLE WRIST FLEX", 0x00, "Sutton_SignWriting"),
    c(0x1D936, None, "SIGNWRITING MOVEMENT-WALLPLANE TRIPLE ALTERNATING", 0x00, "Sutton_SignWriting"),
    c(0x1D937, None, "SIGNWRITING MOVEMENT-WALLPLANE TRIPLE ALTERNATING WRIST FLEX", 0x00, "Sutton_SignWriting"),
    c(0x1D938, None, "SIGNWRITING MOVEMENT-WALLPLANE BEND SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D939, None, "SIGNWRITING MOVEMENT-WALLPLANE BEND MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D93A, None, "SIGNWRITING MOVEMENT-WALLPLANE BEND LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D93B, None, "SIGNWRITING MOVEMENT-WALLPLANE CORNER SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D93C, None, "SIGNWRITING MOVEMENT-WALLPLANE CORNER MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D93D, None, "SIGNWRITING MOVEMENT-WALLPLANE CORNER LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D93E, None, "SIGNWRITING MOVEMENT-WALLPLANE CORNER ROTATION", 0x00, "Sutton_SignWriting"),
    c(0x1D93F, None, "SIGNWRITING MOVEMENT-WALLPLANE CHECK SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D940, None, "SIGNWRITING MOVEMENT-WALLPLANE CHECK MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D941, None, "SIGNWRITING MOVEMENT-WALLPLANE CHECK LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D942, None, "SIGNWRITING MOVEMENT-WALLPLANE BOX SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D943, None, "SIGNWRITING MOVEMENT-WALLPLANE BOX MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D944, None, "SIGNWRITING MOVEMENT-WALLPLANE BOX LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D945, None, "SIGNWRITING MOVEMENT-WALLPLANE ZIGZAG SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D946, None, "SIGNWRITING MOVEMENT-WALLPLANE ZIGZAG MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D947, None, "SIGNWRITING MOVEMENT-WALLPLANE ZIGZAG LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D948, None, "SIGNWRITING MOVEMENT-WALLPLANE PEAKS SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D949, None, "SIGNWRITING MOVEMENT-WALLPLANE PEAKS MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D94A, None, "SIGNWRITING MOVEMENT-WALLPLANE PEAKS LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D94B, None, "SIGNWRITING TRAVEL-WALLPLANE ROTATION-WALLPLANE SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D94C, None, "SIGNWRITING TRAVEL-WALLPLANE ROTATION-WALLPLANE DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D94D, None, "SIGNWRITING TRAVEL-WALLPLANE ROTATION-WALLPLANE ALTERNATING", 0x00, "Sutton_SignWriting"),
    c(0x1D94E, None, "SIGNWRITING TRAVEL-WALLPLANE ROTATION-FLOORPLANE SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D94F, None, "SIGNWRITING TRAVEL-WALLPLANE ROTATION-FLOORPLANE DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D950, None, "SIGNWRITING TRAVEL-WALLPLANE ROTATION-FLOORPLANE ALTERNATING", 0x00, "Sutton_SignWriting"),
    c(0x1D951, None, "SIGNWRITING TRAVEL-WALLPLANE SHAKING", 0x00, "Sutton_SignWriting"),
    c(0x1D952, None, "SIGNWRITING TRAVEL-WALLPLANE ARM SPIRAL SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D953, None, "SIGNWRITING TRAVEL-WALLPLANE ARM SPIRAL DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D954, None, "SIGNWRITING TRAVEL-WALLPLANE ARM SPIRAL TRIPLE", 0x00, "Sutton_SignWriting"),
    c(0x1D955, None, "SIGNWRITING MOVEMENT-DIAGONAL AWAY SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D956, None, "SIGNWRITING MOVEMENT-DIAGONAL AWAY MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D957, None, "SIGNWRITING MOVEMENT-DIAGONAL AWAY LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D958, None, "SIGNWRITING MOVEMENT-DIAGONAL AWAY LARGEST", 0x00, "Sutton_SignWriting"),
    c(0x1D959, None, "SIGNWRITING MOVEMENT-DIAGONAL TOWARDS SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D95A, None, "SIGNWRITING MOVEMENT-DIAGONAL TOWARDS MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D95B, None, "SIGNWRITING MOVEMENT-DIAGONAL TOWARDS LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D95C, None, "SIGNWRITING MOVEMENT-DIAGONAL TOWARDS LARGEST", 0x00, "Sutton_SignWriting"),
    c(0x1D95D, None, "SIGNWRITING MOVEMENT-DIAGONAL BETWEEN AWAY SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D95E, None, "SIGNWRITING MOVEMENT-DIAGONAL BETWEEN AWAY MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D95F, None, "SIGNWRITING MOVEMENT-DIAGONAL BETWEEN AWAY LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D960, None, "SIGNWRITING MOVEMENT-DIAGONAL BETWEEN AWAY LARGEST", 0x00, "Sutton_SignWriting"),
    c(0x1D961, None, "SIGNWRITING MOVEMENT-DIAGONAL BETWEEN TOWARDS SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D962, None, "SIGNWRITING MOVEMENT-DIAGONAL BETWEEN TOWARDS MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D963, None, "SIGNWRITING MOVEMENT-DIAGONAL BETWEEN TOWARDS LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D964, None, "SIGNWRITING MOVEMENT-DIAGONAL BETWEEN TOWARDS LARGEST", 0x00, "Sutton_SignWriting"),
    c(0x1D965, None, "SIGNWRITING MOVEMENT-FLOORPLANE SINGLE STRAIGHT SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D966, None, "SIGNWRITING MOVEMENT-FLOORPLANE SINGLE STRAIGHT MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D967, None, "SIGNWRITING MOVEMENT-FLOORPLANE SINGLE STRAIGHT LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D968, None, "SIGNWRITING MOVEMENT-FLOORPLANE SINGLE STRAIGHT LARGEST", 0x00, "Sutton_SignWriting"),
    c(0x1D969, None, "SIGNWRITING MOVEMENT-FLOORPLANE SINGLE WRIST FLEX", 0x00, "Sutton_SignWriting"),
    c(0x1D96A, None, "SIGNWRITING MOVEMENT-FLOORPLANE DOUBLE STRAIGHT", 0x00, "Sutton_SignWriting"),
    c(0x1D96B, None, "SIGNWRITING MOVEMENT-FLOORPLANE DOUBLE WRIST FLEX", 0x00, "Sutton_SignWriting"),
    c(0x1D96C, None, "SIGNWRITING MOVEMENT-FLOORPLANE DOUBLE ALTERNATING", 0x00, "Sutton_SignWriting"),
    c(0x1D96D, None, "SIGNWRITING MOVEMENT-FLOORPLANE DOUBLE ALTERNATING WRIST FLEX", 0x00, "Sutton_SignWriting"),
    c(0x1D96E, None, "SIGNWRITING MOVEMENT-FLOORPLANE CROSS", 0x00, "Sutton_SignWriting"),
    c(0x1D96F, None, "SIGNWRITING MOVEMENT-FLOORPLANE TRIPLE STRAIGHT MOVEMENT", 0x00, "Sutton_SignWriting"),
    c(0x1D970, None, "SIGNWRITING MOVEMENT-FLOORPLANE TRIPLE WRIST FLEX", 0x00, "Sutton_SignWriting"),
    c(0x1D971, None, "SIGNWRITING MOVEMENT-FLOORPLANE TRIPLE ALTERNATING MOVEMENT", 0x00, "Sutton_SignWriting"),
    c(0x1D972, None, "SIGNWRITING MOVEMENT-FLOORPLANE TRIPLE ALTERNATING WRIST FLEX", 0x00, "Sutton_SignWriting"),
    c(0x1D973, None, "SIGNWRITING MOVEMENT-FLOORPLANE BEND", 0x00, "Sutton_SignWriting"),
    c(0x1D974, None, "SIGNWRITING MOVEMENT-FLOORPLANE CORNER SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D975, None, "SIGNWRITING MOVEMENT-FLOORPLANE CORNER MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D976, None, "SIGNWRITING MOVEMENT-FLOORPLANE CORNER LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D977, None, "SIGNWRITING MOVEMENT-FLOORPLANE CHECK", 0x00, "Sutton_SignWriting"),
    c(0x1D978, None, "SIGNWRITING MOVEMENT-FLOORPLANE BOX SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D979, None, "SIGNWRITING MOVEMENT-FLOORPLANE BOX MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D97A, None, "SIGNWRITING MOVEMENT-FLOORPLANE BOX LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D97B, None, "SIGNWRITING MOVEMENT-FLOORPLANE ZIGZAG SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D97C, None, "SIGNWRITING MOVEMENT-FLOORPLANE ZIGZAG MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D97D, None, "SIGNWRITING MOVEMENT-FLOORPLANE ZIGZAG LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D97E, None, "SIGNWRITING MOVEMENT-FLOORPLANE PEAKS SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D97F, None, "SIGNWRITING MOVEMENT-FLOORPLANE PEAKS MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D980, None, "SIGNWRITING MOVEMENT-FLOORPLANE PEAKS LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D981, None, "SIGNWRITING TRAVEL-FLOORPLANE ROTATION-FLOORPLANE SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D982, None, "SIGNWRITING TRAVEL-FLOORPLANE ROTATION-FLOORPLANE DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D983, None, "SIGNWRITING TRAVEL-FLOORPLANE ROTATION-FLOORPLANE ALTERNATING", 0x00, "Sutton_SignWriting"),
    c(0x1D984, None, "SIGNWRITING TRAVEL-FLOORPLANE ROTATION-WALLPLANE SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D985, None, "SIGNWRITING TRAVEL-FLOORPLANE ROTATION-WALLPLANE DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D986, None, "SIGNWRITING TRAVEL-FLOORPLANE ROTATION-WALLPLANE ALTERNATING", 0x00, "Sutton_SignWriting"),
    c(0x1D987, None, "SIGNWRITING TRAVEL-FLOORPLANE SHAKING", 0x00, "Sutton_SignWriting"),
    c(0x1D988, None, "SIGNWRITING MOVEMENT-WALLPLANE CURVE QUARTER SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D989, None, "SIGNWRITING MOVEMENT-WALLPLANE CURVE QUARTER MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D98A, None, "SIGNWRITING MOVEMENT-WALLPLANE CURVE QUARTER LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D98B, None, "SIGNWRITING MOVEMENT-WALLPLANE CURVE QUARTER LARGEST", 0x00, "Sutton_SignWriting"),
    c(0x1D98C, None, "SIGNWRITING MOVEMENT-WALLPLANE CURVE HALF-CIRCLE SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D98D, None, "SIGNWRITING MOVEMENT-WALLPLANE CURVE HALF-CIRCLE MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D98E, None, "SIGNWRITING MOVEMENT-WALLPLANE CURVE HALF-CIRCLE LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D98F, None, "SIGNWRITING MOVEMENT-WALLPLANE CURVE HALF-CIRCLE LARGEST", 0x00, "Sutton_SignWriting"),
    c(0x1D990, None, "SIGNWRITING MOVEMENT-WALLPLANE CURVE THREE-QUARTER CIRCLE SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D991, None, "SIGNWRITING MOVEMENT-WALLPLANE CURVE THREE-QUARTER CIRCLE MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D992, None, "SIGNWRITING MOVEMENT-WALLPLANE HUMP SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D993, None, "SIGNWRITING MOVEMENT-WALLPLANE HUMP MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D994, None, "SIGNWRITING MOVEMENT-WALLPLANE HUMP LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D995, None, "SIGNWRITING MOVEMENT-WALLPLANE LOOP SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D996, None, "SIGNWRITING MOVEMENT-WALLPLANE LOOP MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D997, None, "SIGNWRITING MOVEMENT-WALLPLANE LOOP LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D998, None, "SIGNWRITING MOVEMENT-WALLPLANE LOOP SMALL DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D999, None, "SIGNWRITING MOVEMENT-WALLPLANE WAVE CURVE DOUBLE SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D99A, None, "SIGNWRITING MOVEMENT-WALLPLANE WAVE CURVE DOUBLE MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D99B, None, "SIGNWRITING MOVEMENT-WALLPLANE WAVE CURVE DOUBLE LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D99C, None, "SIGNWRITING MOVEMENT-WALLPLANE WAVE CURVE TRIPLE SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D99D, None, "SIGNWRITING MOVEMENT-WALLPLANE WAVE CURVE TRIPLE MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D99E, None, "SIGNWRITING MOVEMENT-WALLPLANE WAVE CURVE TRIPLE LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D99F, None, "SIGNWRITING MOVEMENT-WALLPLANE CURVE THEN STRAIGHT", 0x00, "Sutton_SignWriting"),
    c(0x1D9A0, None, "SIGNWRITING MOVEMENT-WALLPLANE CURVED CROSS SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D9A1, None, "SIGNWRITING MOVEMENT-WALLPLANE CURVED CROSS MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D9A2, None, "SIGNWRITING ROTATION-WALLPLANE SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9A3, None, "SIGNWRITING ROTATION-WALLPLANE DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9A4, None, "SIGNWRITING ROTATION-WALLPLANE ALTERNATE", 0x00, "Sutton_SignWriting"),
    c(0x1D9A5, None, "SIGNWRITING MOVEMENT-WALLPLANE SHAKING", 0x00, "Sutton_SignWriting"),
    c(0x1D9A6, None, "SIGNWRITING MOVEMENT-WALLPLANE CURVE HITTING FRONT WALL", 0x00, "Sutton_SignWriting"),
    c(0x1D9A7, None, "SIGNWRITING MOVEMENT-WALLPLANE HUMP HITTING FRONT WALL", 0x00, "Sutton_SignWriting"),
    c(0x1D9A8, None, "SIGNWRITING MOVEMENT-WALLPLANE LOOP HITTING FRONT WALL", 0x00, "Sutton_SignWriting"),
    c(0x1D9A9, None, "SIGNWRITING MOVEMENT-WALLPLANE WAVE HITTING FRONT WALL", 0x00, "Sutton_SignWriting"),
    c(0x1D9AA, None, "SIGNWRITING ROTATION-WALLPLANE SINGLE HITTING FRONT WALL", 0x00, "Sutton_SignWriting"),
    c(0x1D9AB, None, "SIGNWRITING ROTATION-WALLPLANE DOUBLE HITTING FRONT WALL", 0x00, "Sutton_SignWriting"),
    c(0x1D9AC, None, "SIGNWRITING ROTATION-WALLPLANE ALTERNATING HITTING FRONT WALL", 0x00, "Sutton_SignWriting"),
    c(0x1D9AD, None, "SIGNWRITING MOVEMENT-WALLPLANE CURVE HITTING CHEST", 0x00, "Sutton_SignWriting"),
    c(0x1D9AE, None, "SIGNWRITING MOVEMENT-WALLPLANE HUMP HITTING CHEST", 0x00, "Sutton_SignWriting"),
    c(0x1D9AF, None, "SIGNWRITING MOVEMENT-WALLPLANE LOOP HITTING CHEST", 0x00, "Sutton_SignWriting"),
    c(0x1D9B0, None, "SIGNWRITING MOVEMENT-WALLPLANE WAVE HITTING CHEST", 0x00, "Sutton_SignWriting"),
    c(0x1D9B1, None, "SIGNWRITING ROTATION-WALLPLANE SINGLE HITTING CHEST", 0x00, "Sutton_SignWriting"),
    c(0x1D9B2, None, "SIGNWRITING ROTATION-WALLPLANE DOUBLE HITTING CHEST", 0x00, "Sutton_SignWriting"),
    c(0x1D9B3, None, "SIGNWRITING ROTATION-WALLPLANE ALTERNATING HITTING CHEST", 0x00, "Sutton_SignWriting"),
    c(0x1D9B4, None, "SIGNWRITING MOVEMENT-WALLPLANE WAVE DIAGONAL PATH SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D9B5, None, "SIGNWRITING MOVEMENT-WALLPLANE WAVE DIAGONAL PATH MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D9B6, None, "SIGNWRITING MOVEMENT-WALLPLANE WAVE DIAGONAL PATH LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D9B7, None, "SIGNWRITING MOVEMENT-FLOORPLANE CURVE HITTING CEILING SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D9B8, None, "SIGNWRITING MOVEMENT-FLOORPLANE CURVE HITTING CEILING LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D9B9, None, "SIGNWRITING MOVEMENT-FLOORPLANE HUMP HITTING CEILING SMALL DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9BA, None, "SIGNWRITING MOVEMENT-FLOORPLANE HUMP HITTING CEILING LARGE DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9BB, None, "SIGNWRITING MOVEMENT-FLOORPLANE HUMP HITTING CEILING SMALL TRIPLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9BC, None, "SIGNWRITING MOVEMENT-FLOORPLANE HUMP HITTING CEILING LARGE TRIPLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9BD, None, "SIGNWRITING MOVEMENT-FLOORPLANE LOOP HITTING CEILING SMALL SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9BE, None, "SIGNWRITING MOVEMENT-FLOORPLANE LOOP HITTING CEILING LARGE SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9BF, None, "SIGNWRITING MOVEMENT-FLOORPLANE LOOP HITTING CEILING SMALL DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9C0, None, "SIGNWRITING MOVEMENT-FLOORPLANE LOOP HITTING CEILING LARGE DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9C1, None, "SIGNWRITING MOVEMENT-FLOORPLANE WAVE HITTING CEILING SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D9C2, None, "SIGNWRITING MOVEMENT-FLOORPLANE WAVE HITTING CEILING LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D9C3, None, "SIGNWRITING ROTATION-FLOORPLANE SINGLE HITTING CEILING", 0x00, "Sutton_SignWriting"),
    c(0x1D9C4, None, "SIGNWRITING ROTATION-FLOORPLANE DOUBLE HITTING CEILING", 0x00, "Sutton_SignWriting"),
    c(0x1D9C5, None, "SIGNWRITING ROTATION-FLOORPLANE ALTERNATING HITTING CEILING", 0x00, "Sutton_SignWriting"),
    c(0x1D9C6, None, "SIGNWRITING MOVEMENT-FLOORPLANE CURVE HITTING FLOOR SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D9C7, None, "SIGNWRITING MOVEMENT-FLOORPLANE CURVE HITTING FLOOR LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D9C8, None, "SIGNWRITING MOVEMENT-FLOORPLANE HUMP HITTING FLOOR SMALL DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9C9, None, "SIGNWRITING MOVEMENT-FLOORPLANE HUMP HITTING FLOOR LARGE DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9CA, None, "SIGNWRITING MOVEMENT-FLOORPLANE HUMP HITTING FLOOR TRIPLE SMALL TRIPLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9CB, None, "SIGNWRITING MOVEMENT-FLOORPLANE HUMP HITTING FLOOR TRIPLE LARGE TRIPLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9CC, None, "SIGNWRITING MOVEMENT-FLOORPLANE LOOP HITTING FLOOR SMALL SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9CD, None, "SIGNWRITING MOVEMENT-FLOORPLANE LOOP HITTING FLOOR LARGE SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9CE, None, "SIGNWRITING MOVEMENT-FLOORPLANE LOOP HITTING FLOOR SMALL DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9CF, None, "SIGNWRITING MOVEMENT-FLOORPLANE LOOP HITTING FLOOR LARGE DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9D0, None, "SIGNWRITING MOVEMENT-FLOORPLANE WAVE HITTING FLOOR SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D9D1, None, "SIGNWRITING MOVEMENT-FLOORPLANE WAVE HITTING FLOOR LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D9D2, None, "SIGNWRITING ROTATION-FLOORPLANE SINGLE HITTING FLOOR", 0x00, "Sutton_SignWriting"),
    c(0x1D9D3, None, "SIGNWRITING ROTATION-FLOORPLANE DOUBLE HITTING FLOOR", 0x00, "Sutton_SignWriting"),
    c(0x1D9D4, None, "SIGNWRITING ROTATION-FLOORPLANE ALTERNATING HITTING FLOOR", 0x00, "Sutton_SignWriting"),
    c(0x1D9D5, None, "SIGNWRITING MOVEMENT-FLOORPLANE CURVE SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D9D6, None, "SIGNWRITING MOVEMENT-FLOORPLANE CURVE MEDIUM", 0x00, "Sutton_SignWriting"),
    c(0x1D9D7, None, "SIGNWRITING MOVEMENT-FLOORPLANE CURVE LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D9D8, None, "SIGNWRITING MOVEMENT-FLOORPLANE CURVE LARGEST", 0x00, "Sutton_SignWriting"),
    c(0x1D9D9, None, "SIGNWRITING MOVEMENT-FLOORPLANE CURVE COMBINED", 0x00, "Sutton_SignWriting"),
    c(0x1D9DA, None, "SIGNWRITING MOVEMENT-FLOORPLANE HUMP SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D9DB, None, "SIGNWRITING MOVEMENT-FLOORPLANE LOOP SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D9DC, None, "SIGNWRITING MOVEMENT-FLOORPLANE WAVE SNAKE", 0x00, "Sutton_SignWriting"),
    c(0x1D9DD, None, "SIGNWRITING MOVEMENT-FLOORPLANE WAVE SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D9DE, None, "SIGNWRITING MOVEMENT-FLOORPLANE WAVE LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D9DF, None, "SIGNWRITING ROTATION-FLOORPLANE SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9E0, None, "SIGNWRITING ROTATION-FLOORPLANE DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9E1, None, "SIGNWRITING ROTATION-FLOORPLANE ALTERNATING", 0x00, "Sutton_SignWriting"),
    c(0x1D9E2, None, "SIGNWRITING MOVEMENT-FLOORPLANE SHAKING PARALLEL", 0x00, "Sutton_SignWriting"),
    c(0x1D9E3, None, "SIGNWRITING MOVEMENT-WALLPLANE ARM CIRCLE SMALL SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9E4, None, "SIGNWRITING MOVEMENT-WALLPLANE ARM CIRCLE MEDIUM SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9E5, None, "SIGNWRITING MOVEMENT-WALLPLANE ARM CIRCLE SMALL DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9E6, None, "SIGNWRITING MOVEMENT-WALLPLANE ARM CIRCLE MEDIUM DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9E7, None, "SIGNWRITING MOVEMENT-FLOORPLANE ARM CIRCLE HITTING WALL SMALL SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9E8, None, "SIGNWRITING MOVEMENT-FLOORPLANE ARM CIRCLE HITTING WALL MEDIUM SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9E9, None, "SIGNWRITING MOVEMENT-FLOORPLANE ARM CIRCLE HITTING WALL LARGE SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9EA, None, "SIGNWRITING MOVEMENT-FLOORPLANE ARM CIRCLE HITTING WALL SMALL DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9EB, None, "SIGNWRITING MOVEMENT-FLOORPLANE ARM CIRCLE HITTING WALL MEDIUM DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9EC, None, "SIGNWRITING MOVEMENT-FLOORPLANE ARM CIRCLE HITTING WALL LARGE DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9ED, None, "SIGNWRITING MOVEMENT-WALLPLANE WRIST CIRCLE FRONT SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9EE, None, "SIGNWRITING MOVEMENT-WALLPLANE WRIST CIRCLE FRONT DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9EF, None, "SIGNWRITING MOVEMENT-FLOORPLANE WRIST CIRCLE HITTING WALL SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9F0, None, "SIGNWRITING MOVEMENT-FLOORPLANE WRIST CIRCLE HITTING WALL DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9F1, None, "SIGNWRITING MOVEMENT-WALLPLANE FINGER CIRCLES SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9F2, None, "SIGNWRITING MOVEMENT-WALLPLANE FINGER CIRCLES DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9F3, None, "SIGNWRITING MOVEMENT-FLOORPLANE FINGER CIRCLES HITTING WALL SINGLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9F4, None, "SIGNWRITING MOVEMENT-FLOORPLANE FINGER CIRCLES HITTING WALL DOUBLE", 0x00, "Sutton_SignWriting"),
    c(0x1D9F5, None, "SIGNWRITING DYNAMIC ARROWHEAD SMALL", 0x00, "Sutton_SignWriting"),
    c(0x1D9F6, None, "SIGNWRITING DYNAMIC ARROWHEAD LARGE", 0x00, "Sutton_SignWriting"),
    c(0x1D9F7, None, "SIGNWRITING DYNAMIC FAST", 0x00, "Sutton_SignWriting"),
    c(0x1D9F8, None, "SIGNWRITING DYNAMIC SLOW", 0x00, "Sutton_SignWriting"),
    c(0x1D9F9, None, "SIGNWRITING DYNAMIC TENSE", 0x00, "Sutton_SignWriting"),
    c(0x1D9FA, None, "SIGNWRITING DYNAMIC RELAXED", 0x00, "Sutton_SignWriting"),
    c(0x1D9FB, None, "SIGNWRITING DYNAMIC SIMULTANEOUS", 0x00, "Sutton_SignWriting"),
    c(0x1D9FC, None, "SIGNWRITING DYNAMIC SIMULTANEOUS ALTERNATING", 0x00, "Sutton_SignWriting"),
    c(0x1D9FD, None, "SIGNWRITING DYNAMIC EVERY OTHER TIME", 0x00, "Sutton_SignWriting"),
    c(0x1D9FE, None, "SIGNWRITING DYNAMIC GRADUAL", 0x00, "Sutton_SignWriting"),
    c(0x1D9FF, None, "SIGNWRITING HEAD", 0x00, "Sutton_SignWriting"),
    c(0x1DA00, None, "SIGNWRITING HEAD RIM", 0x20, "Sutton_SignWriting"),
    c(0x1DA01, None, "SIGNWRITING HEAD MOVEMENT-WALLPLANE STRAIGHT", 0x20, "Sutton_SignWriting"),
    c(0x1DA02, None, "SIGNWRITING HEAD MOVEMENT-WALLPLANE TILT", 0x20, "Sutton_SignWriting"),
    c(0x1DA03, None, "SIGNWRITING HEAD MOVEMENT-FLOORPLANE STRAIGHT", 0x20, "Sutton_SignWriting"),
    c(0x1DA04, None, "SIGNWRITING HEAD MOVEMENT-WALLPLANE CURVE", 0x20, "Sutton_SignWriting"),
    c(0x1DA05, None, "SIGNWRITING HEAD MOVEMENT-FLOORPLANE CURVE", 0x20, "Sutton_SignWriting"),
    c(0x1DA06, None, "SIGNWRITING HEAD MOVEMENT CIRCLE", 0x20, "Sutton_SignWriting"),
    c(0x1DA07, None, "SIGNWRITING FACE DIRECTION POSITION NOSE FORWARD TILTING", 0x20, "Sutton_SignWriting"),
    c(0x1DA08, None, "SIGNWRITING FACE DIRECTION POSITION NOSE UP OR DOWN", 0x20, "Sutton_SignWriting"),
    c(0x1DA09, None, "SIGNWRITING FACE DIRECTION POSITION NOSE UP OR DOWN TILTING", 0x20, "Sutton_SignWriting"),
    c(0x1DA0A, None, "SIGNWRITING EYEBROWS STRAIGHT UP", 0x20, "Sutton_SignWriting"),
    c(0x1DA0B, None, "SIGNWRITING EYEBROWS STRAIGHT NEUTRAL", 0x20, "Sutton_SignWriting"),
    c(0x1DA0C, None, "SIGNWRITING EYEBROWS STRAIGHT DOWN", 0x20, "Sutton_SignWriting"),
    c(0x1DA0D, None, "SIGNWRITING DREAMY EYEBROWS NEUTRAL DOWN", 0x20, "Sutton_SignWriting"),
    c(0x1DA0E, None, "SIGNWRITING DREAMY EYEBROWS DOWN NEUTRAL", 0x20, "Sutton_SignWriting"),
    c(0x1DA0F, None, "SIGNWRITING DREAMY EYEBROWS UP NEUTRAL", 0x20, "Sutton_SignWriting"),
    c(0x1DA10, None, "SIGNWRITING DREAMY EYEBROWS NEUTRAL UP", 0x20, "Sutton_SignWriting"),
    c(0x1DA11, None, "SIGNWRITING FOREHEAD NEUTRAL", 0x20, "Sutton_SignWriting"),
    c(0x1DA12, None, "SIGNWRITING FOREHEAD CONTACT", 0x20, "Sutton_SignWriting"),
    c(0x1DA13, None, "SIGNWRITING FOREHEAD WRINKLED", 0x20, "Sutton_SignWriting"),
    c(0x1DA14, None, "SIGNWRITING EYES OPEN", 0x20, "Sutton_SignWriting"),
    c(0x1DA15, None, "SIGNWRITING EYES SQUEEZED", 0x20, "Sutton_SignWriting"),
    c(0x1DA16, None, "SIGNWRITING EYES CLOSED", 0x20, "Sutton_SignWriting"),
    c(0x1DA17, None, "SIGNWRITING EYE BLINK SINGLE", 0x20, "Sutton_SignWriting"),
    c(0x1DA18, None, "SIGNWRITING EYE BLINK MULTIPLE", 0x20, "Sutton_SignWriting"),
    c(0x1DA19, None, "SIGNWRITING EYES HALF OPEN", 0x20, "Sutton_SignWriting"),
    c(0x1DA1A, None, "SIGNWRITING EYES WIDE OPEN", 0x20, "Sutton_SignWriting"),
    c(0x1DA1B, None, "SIGNWRITING EYES HALF CLOSED", 0x20, "Sutton_SignWriting"),
    c(0x1DA1C, None, "SIGNWRITING EYES WIDENING MOVEMENT", 0x20, "Sutton_SignWriting"),
    c(0x1DA1D, None, "SIGNWRITING EYE WINK", 0x20, "Sutton_SignWriting"),
    c(0x1DA1E, None, "SIGNWRITING EYELASHES UP", 0x20, "Sutton_SignWriting"),
    c(0x1DA1F, None, "SIGNWRITING EYELASHES DOWN", 0x20, "Sutton_SignWriting"),
    c(0x1DA20, None, "SIGNWRITING EYELASHES FLUTTERING", 0x20, "Sutton_SignWriting"),
    c(0x1DA21, None, "SIGNWRITING EYEGAZE-WALLPLANE STRAIGHT", 0x20, "Sutton_SignWriting"),
    c(0x1DA22, None, "SIGNWRITING EYEGAZE-WALLPLANE STRAIGHT DOUBLE", 0x20, "Sutton_SignWriting"),
    c(0x1DA23, None, "SIGNWRITING EYEGAZE-WALLPLANE STRAIGHT ALTERNATING", 0x20, "Sutton_SignWriting"),
    c(0x1DA24, None, "SIGNWRITING EYEGAZE-FLOORPLANE STRAIGHT", 0x20, "Sutton_SignWriting"),
    c(0x1DA25, None, "SIGNWRITING EYEGAZE-FLOORPLANE STRAIGHT DOUBLE", 0x20, "Sutton_SignWriting"),
    c(0x1DA26, None, "SIGNWRITING EYEGAZE-FLOORPLANE STRAIGHT ALTERNATING", 0x20, "Sutton_SignWriting"),
    c(0x1DA27, None, "SIGNWRITING EYEGAZE-WALLPLANE CURVED", 0x20, "Sutton_SignWriting"),
    c(0x1DA28, None, "SIGNWRITING EYEGAZE-FLOORPLANE CURVED", 0x20, "Sutton_SignWriting"),
    c(0x1DA29, None, "SIGNWRITING EYEGAZE-WALLPLANE CIRCLING", 0x20, "Sutton_SignWriting"),
    c(0x1DA2A, None, "SIGNWRITING CHEEKS PUFFED", 0x20, "Sutton_SignWriting"),
    c(0x1DA2B, None, "SIGNWRITING CHEEKS NEUTRAL", 0x20, "Sutton_SignWriting"),
    c(0x1DA2C, None, "SIGNWRITING CHEEKS SUCKED", 0x20, "Sutton_SignWriting"),
    c(0x1DA2D, None, "SIGNWRITING TENSE CHEEKS HIGH", 0x20, "Sutton_SignWriting"),
    c(0x1DA2E, None, "SIGNWRITING TENSE CHEEKS MIDDLE", 0x20, "Sutton_SignWriting"),
    c(0x1DA2F, None, "SIGNWRITING TENSE CHEEKS LOW", 0x20, "Sutton_SignWriting"),
    c(0x1DA30, None, "SIGNWRITING EARS", 0x20, "Sutton_SignWriting"),
    c(0x1DA31, None, "SIGNWRITING NOSE NEUTRAL", 0x20, "Sutton_SignWriting"),
    c(0x1DA32, None, "SIGNWRITING NOSE CONTACT", 0x20, "Sutton_SignWriting"),
    c(0x1DA33, None, "SIGNWRITING NOSE WRINKLES", 0x20, "Sutton_SignWriting"),
    c(0x1DA34, None, "SIGNWRITING NOSE WIGGLES", 0x20, "Sutton_SignWriting"),
    c(0x1DA35, None, "SIGNWRITING AIR BLOWING OUT", 0x20, "Sutton_SignWriting"),
    c(0x1DA36, None, "SIGNWRITING AIR SUCKING IN", 0x20, "Sutton_SignWriting"),
    c(0x1DA37, None, "SIGNWRITING AIR BLOW SMALL ROTATIONS", 0x00, "Sutton_SignWriting"),
    c(0x1DA38, None, "SIGNWRITING AIR SUCK SMALL ROTATIONS", 0x00, "Sutton_SignWriting"),
    c(0x1DA39, None, "SIGNWRITING BREATH INHALE", 0x00, "Sutton_SignWriting"),
    c(0x1DA3A, None, "SIGNWRITING BREATH EXHALE", 0x00, "Sutton_SignWriting"),
    c(0x1DA3B, None, "SIGNWRITING MOUTH CLOSED NEUTRAL", 0x20, "Sutton_SignWriting"),
    c(0x1DA3C, None, "SIGNWRITING MOUTH CLOSED FORWARD", 0x20, "Sutton_SignWriting"),
    c(0x1DA3D, None, "SIGNWRITING MOUTH CLOSED CONTACT", 0x20, "Sutton_SignWriting"),
    c(0x1DA3E, None, "SIGNWRITING MOUTH SMILE", 0x20, "Sutton_SignWriting"),
    c(0x1DA3F, None, "SIGNWRITING MOUTH SMILE WRINKLED", 0x20, "Sutton_SignWriting"),
    c(0x1DA40, None, "SIGNWRITING MOUTH SMILE OPEN", 0x20, "Sutton_SignWriting"),
    c(0x1DA41, None, "SIGNWRITING MOUTH FROWN", 0x20, "Sutton_SignWriting"),
    c(0x1DA42, None, "SIGNWRITING MOUTH FROWN WRINKLED", 0x20, "Sutton_SignWriting"),
    c(0x1DA43, None, "SIGNWRITING MOUTH FROWN OPEN", 0x20, "Sutton_SignWriting"),
    c(0x1DA44, None, "SIGNWRITING MOUTH OPEN CIRCLE", 0x20, "Sutton_SignWriting"),
    c(0x1DA45, None, "SIGNWRITING MOUTH OPEN FORWARD", 0x20, "Sutton_SignWriting"),
    c(0x1DA46, None, "SIGNWRITING MOUTH OPEN WRINKLED", 0x20, "Sutton_SignWriting"),
    c(0x1DA47, None, "SIGNWRITING MOUTH OPEN OVAL", 0x20, "Sutton_SignWriting"),
    c(0x1DA48, None, "SIGNWRITING MOUTH OPEN OVAL WRINKLED", 0x20, "Sutton_SignWriting"),
    c(0x1DA49, None, "SIGNWRITING MOUTH OPEN OVAL YAWN", 0x20, "Sutton_SignWriting"),
    c(0x1DA4A, None, "SIGNWRITING MOUTH OPEN RECTANGLE", 0x20, "Sutton_SignWriting"),
    c(0x1DA4B, None, "SIGNWRITING MOUTH OPEN RECTANGLE WRINKLED", 0x20, "Sutton_SignWriting"),
    c(0x1DA4C, None, "SIGNWRITING MOUTH OPEN RECTANGLE YAWN", 0x20, "Sutton_SignWriting"),
    c(0x1DA4D, None, "SIGNWRITING MOUTH KISS", 0x20, "Sutton_SignWriting"),
    c(0x1DA4E, None, "SIGNWRITING MOUTH KISS FORWARD", 0x20, "Sutton_SignWriting"),
    c(0x1DA4F, None, "SIGNWRITING MOUTH KISS WRINKLED", 0x20, "Sutton_SignWriting"),
    c(0x1DA50, None, "SIGNWRITING MOUTH TENSE", 0x20, "Sutton_SignWriting"),
    c(0x1DA51, None, "SIGNWRITING MOUTH TENSE FORWARD", 0x20, "Sutton_SignWriting"),
    c(0x1DA52, None, "SIGNWRITING MOUTH TENSE SUCKED", 0x20, "Sutton_SignWriting"),
    c(0x1DA53, None, "SIGNWRITING LIPS PRESSED TOGETHER", 0x20, "Sutton_SignWriting"),
    c(0x1DA54, None, "SIGNWRITING LIP LOWER OVER UPPER", 0x20, "Sutton_SignWriting"),
    c(0x1DA55, None, "SIGNWRITING LIP UPPER OVER LOWER", 0x20, "Sutton_SignWriting"),
    c(0x1DA56, None, "SIGNWRITING MOUTH CORNERS", 0x20, "Sutton_SignWriting"),
    c(0x1DA57, None, "SIGNWRITING MOUTH WRINKLES SINGLE", 0x20, "Sutton_SignWriting"),
    c(0x1DA58, None, "SIGNWRITING MOUTH WRINKLES DOUBLE", 0x20, "Sutton_SignWriting"),
    c(0x1DA59, None, "SIGNWRITING TONGUE STICKING OUT FAR", 0x20, "Sutton_SignWriting"),
    c(0x1DA5A, None, "SIGNWRITING TONGUE LICKING LIPS", 0x20, "Sutton_SignWriting"),
    c(0x1DA5B, None, "SIGNWRITING TONGUE TIP BETWEEN LIPS", 0x20, "Sutton_SignWriting"),
    c(0x1DA5C, None, "SIGNWRITING TONGUE TIP TOUCHING INSIDE MOUTH", 0x20, "Sutton_SignWriting"),
    c(0x1DA5D, None, "SIGNWRITING TONGUE INSIDE MOUTH RELAXED", 0x20, "Sutton_SignWriting"),
    c(0x1DA5E, None, "SIGNWRITING TONGUE MOVES AGAINST CHEEK", 0x20, "Sutton_SignWriting"),
    c(0x1DA5F, None, "SIGNWRITING TONGUE CENTRE STICKING OUT", 0x20, "Sutton_SignWriting"),
    c(0x1DA60, None, "SIGNWRITING TONGUE CENTRE INSIDE MOUTH", 0x20, "Sutton_SignWriting"),
    c(0x1DA61, None, "SIGNWRITING TEETH", 0x20, "Sutton_SignWriting"),
    c(0x1DA62, None, "SIGNWRITING TEETH MOVEMENT", 0x20, "Sutton_SignWriting"),
    c(0x1DA63, None, "SIGNWRITING TEETH ON TONGUE", 0x20, "Sutton_SignWriting"),
    c(0x1DA64, None, "SIGNWRITING TEETH ON TONGUE MOVEMENT", 0x20, "Sutton_SignWriting"),
    c(0x1DA65, None, "SIGNWRITING TEETH ON LIPS", 0x20, "Sutton_SignWriting"),
    c(0x1DA66, None, "SIGNWRITING TEETH ON LIPS MOVEMENT", 0x20, "Sutton_SignWriting"),
    c(0x1DA67, None, "SIGNWRITING TEETH BITE LIPS", 0x20, "Sutton_SignWriting"),
    c(0x1DA68, None, "SIGNWRITING MOVEMENT-WALLPLANE JAW", 0x20, "Sutton_SignWriting"),
    c(0x1DA69, None, "SIGNWRITING MOVEMENT-FLOORPLANE JAW", 0x20, "Sutton_SignWriting"),
    c(0x1DA6A, None, "SIGNWRITING NECK", 0x20, "Sutton_SignWriting"),
    c(0x1DA6B, None, "SIGNWRITING HAIR", 0x20, "Sutton_SignWriting"),
    c(0x1DA6C, None, "SIGNWRITING EXCITEMENT", 0x20, "Sutton_SignWriting"),
    c(0x1DA6D, None, "SIGNWRITING SHOULDER HIP SPINE", 0x00, "Sutton_SignWriting"),
    c(0x1DA6E, None, "SIGNWRITING SHOULDER HIP POSITIONS", 0x00, "Sutton_SignWriting"),
    c(0x1DA6F, None, "SIGNWRITING WALLPLANE SHOULDER HIP MOVE", 0x00, "Sutton_SignWriting"),
    c(0x1DA70, None, "SIGNWRITING FLOORPLANE SHOULDER HIP MOVE", 0x00, "Sutton_SignWriting"),
    c(0x1DA71, None, "SIGNWRITING SHOULDER TILTING FROM WAIST", 0x00, "Sutton_SignWriting"),
    c(0x1DA72, None, "SIGNWRITING TORSO-WALLPLANE STRAIGHT STRETCH", 0x00, "Sutton_SignWriting"),
    c(0x1DA73, None, "SIGNWRITING TORSO-WALLPLANE CURVED BEND", 0x00, "Sutton_SignWriting"),
    c(0x1DA74, None, "SIGNWRITING TORSO-FLOORPLANE TWISTING", 0x00, "Sutton_SignWriting"),
    c(0x1DA75, None, "SIGNWRITING UPPER BODY TILTING FROM HIP JOINTS", 0x20, "Sutton_SignWriting"),
    c(0x1DA76, None, "SIGNWRITING LIMB COMBINATION", 0x00, "Sutton_SignWriting"),
    c(0x1DA77, None, "SIGNWRITING LIMB LENGTH-1", 0x00, "Sutton_SignWriting"),
    c(0x1DA78, None, "SIGNWRITING LIMB LENGTH-2", 0x00, "Sutton_SignWriting"),
    c(0x1DA79, None, "SIGNWRITING LIMB LENGTH-3", 0x00, "Sutton_SignWriting"),
    c(0x1DA7A, None, "SIGNWRITING LIMB LENGTH-4", 0x00, "Sutton_SignWriting"),
    c(0x1DA7B, None, "SIGNWRITING LIMB LENGTH-5", 0x00, "Sutton_SignWriting"),
    c(0x1DA7C, None, "SIGNWRITING LIMB LENGTH-6", 0x00, "Sutton_SignWriting"),
    c(0x1DA7D, None, "SIGNWRITING LIMB LENGTH-7", 0x00, "Sutton_SignWriting"),
    c(0x1DA7E, None, "SIGNWRITING FINGER", 0x00, "Sutton_SignWriting"),
    c(0x1DA7F, None, "SIGNWRITING LOCATION-WALLPLANE SPACE", 0x00, "Sutton_SignWriting"),
    c(0x1DA80, None, "SIGNWRITING LOCATION-FLOORPLANE SPACE", 0x00, "Sutton_SignWriting"),
    c(0x1DA81, None, "SIGNWRITING LOCATION HEIGHT", 0x00, "Sutton_SignWriting"),
    c(0x1DA82, None, "SIGNWRITING LOCATION WIDTH", 0x00, "Sutton_SignWriting"),
    c(0x1DA83, None, "SIGNWRITING LOCATION DEPTH", 0x00, "Sutton_SignWriting"),
    c(0x1DA84, None, "SIGNWRITING LOCATION HEAD NECK", 0x20, "Sutton_SignWriting"),
    c(0x1DA85, None, "SIGNWRITING LOCATION TORSO", 0x00, "Sutton_SignWriting"),
    c(0x1DA86, None, "SIGNWRITING LOCATION LIMBS DIGITS", 0x00, "Sutton_SignWriting"),
    c(0x1DA87, None, "SIGNWRITING COMMA", 0x00, "Sutton_SignWriting"),
    c(0x1DA88, None, "SIGNWRITING FULL STOP", 0x00, "Sutton_SignWriting"),
    c(0x1DA89, None, "SIGNWRITING SEMICOLON", 0x00, "Sutton_SignWriting"),
    c(0x1DA8A, None, "SIGNWRITING COLON", 0x00, "Sutton_SignWriting"),
    c(0x1DA8B, None, "SIGNWRITING PARENTHESIS", 0x00, "Sutton_SignWriting"),
    c(0x1DA9B, None, "SIGNWRITING FILL MODIFIER-2", 0x20, "Sutton_SignWriting"),
    c(0x1DA9C, None, "SIGNWRITING FILL MODIFIER-3", 0x20, "Sutton_SignWriting"),
    c(0x1DA9D, None, "SIGNWRITING FILL MODIFIER-4", 0x20, "Sutton_SignWriting"),
    c(0x1DA9E, None, "SIGNWRITING FILL MODIFIER-5", 0x20, "Sutton_SignWriting"),
    c(0x1DA9F, None, "SIGNWRITING FILL MODIFIER-6", 0x20, "Sutton_SignWriting"),
    c(0x1DAA1, None, "SIGNWRITING ROTATION MODIFIER-2", 0x20, "Sutton_SignWriting"),
    c(0x1DAA2, None, "SIGNWRITING ROTATION MODIFIER-3", 0x20, "Sutton_SignWriting"),
    c(0x1DAA3, None, "SIGNWRITING ROTATION MODIFIER-4", 0x20, "Sutton_SignWriting"),
    c(0x1DAA4, None, "SIGNWRITING ROTATION MODIFIER-5", 0x20, "Sutton_SignWriting"),
    c(0x1DAA5, None, "SIGNWRITING ROTATION MODIFIER-6", 0x20, "Sutton_SignWriting"),
    c(0x1DAA6, None, "SIGNWRITING ROTATION MODIFIER-7", 0x20, "Sutton_SignWriting"),
    c(0x1DAA7, None, "SIGNWRITING ROTATION MODIFIER-8", 0x20, "Sutton_SignWriting"),
    c(0x1DAA8, None, "SIGNWRITING ROTATION MODIFIER-9", 0x20, "Sutton_SignWriting"),
    c(0x1DAA9, None, "SIGNWRITING ROTATION MODIFIER-10", 0x20, "Sutton_SignWriting"),
    c(0x1DAAA, None, "SIGNWRITING ROTATION MODIFIER-11", 0x20, "Sutton_SignWriting"),
    c(0x1DAAB, None, "SIGNWRITING ROTATION MODIFIER-12", 0x20, "Sutton_SignWriting"),
    c(0x1DAAC, None, "SIGNWRITING ROTATION MODIFIER-13", 0x20, "Sutton_SignWriting"),
    c(0x1DAAD, None, "SIGNWRITING ROTATION MODIFIER-14", 0x20, "Sutton_SignWriting"),
    c(0x1DAAE, None, "SIGNWRITING ROTATION MODIFIER-15", 0x20, "Sutton_SignWriting"),
    c(0x1DAAF, None, "SIGNWRITING ROTATION MODIFIER-16", 0x20, "Sutton_SignWriting"),
    c(0x1DF00, None, "LATIN SMALL LETTER FENG DIGRAPH WITH TRILL", 0x31, "Latin_Ext_G"),
    c(0x1DF01, None, "LATIN SMALL LETTER REVERSED SCRIPT G", 0x31, "Latin_Ext_G"),
    c(0x1DF02, None, "LATIN LETTER SMALL CAPITAL TURNED G", 0x31, "Latin_Ext_G"),
    c(0x1DF03, None, "LATIN SMALL LETTER REVERSED K", 0x31, "Latin_Ext_G"),
    c(0x1DF04, None, "LATIN LETTER SMALL CAPITAL L WITH BELT", 0x31, "Latin_Ext_G"),
    c(0x1DF05, None, "LATIN SMALL LETTER LEZH WITH RETROFLEX HOOK", 0x31, "Latin_Ext_G"),
    c(0x1DF06, None, "LATIN SMALL LETTER TURNED Y WITH BELT", 0x31, "Latin_Ext_G"),
    c(0x1DF07, None, "LATIN SMALL LETTER REVERSED ENG", 0x31, "Latin_Ext_G"),
    c(0x1DF08, None, "LATIN SMALL LETTER TURNED R WITH LONG LEG AND RETROFLEX HOOK", 0x31, "Latin_Ext_G"),
    c(0x1DF09, None, "LATIN SMALL LETTER T WITH HOOK AND RETROFLEX HOOK", 0x31, "Latin_Ext_G"),
    c(0x1DF0A, None, "LATIN LETTER RETROFLEX CLICK WITH RETROFLEX HOOK", 0x31, "Latin_Ext_G"),
    c(0x1DF0B, None, "LATIN SMALL LETTER ESH WITH DOUBLE BAR", 0x31, "Latin_Ext_G"),
    c(0x1DF0C, None, "LATIN SMALL LETTER ESH WITH DOUBLE BAR AND CURL", 0x31, "Latin_Ext_G"),
    c(0x1DF0D, None, "LATIN SMALL LETTER TURNED T WITH CURL", 0x31, "Latin_Ext_G"),
    c(0x1DF0E, None, "LATIN LETTER INVERTED GLOTTAL STOP WITH CURL", 0x31, "Latin_Ext_G"),
    c(0x1DF0F, None, "LATIN LETTER STRETCHED C WITH CURL", 0x31, "Latin_Ext_G"),
    c(0x1DF10, None, "LATIN LETTER SMALL CAPITAL TURNED K", 0x31, "Latin_Ext_G"),
    c(0x1DF11, None, "LATIN SMALL LETTER L WITH FISHHOOK", 0x31, "Latin_Ext_G"),
    c(0x1DF12, None, "LATIN SMALL LETTER DEZH DIGRAPH WITH PALATAL HOOK", 0x31, "Latin_Ext_G"),
    c(0x1DF13, None, "LATIN SMALL LETTER L WITH BELT AND PALATAL HOOK", 0x31, "Latin_Ext_G"),
    c(0x1DF14, None, "LATIN SMALL LETTER ENG WITH PALATAL HOOK", 0x31, "Latin_Ext_G"),
    c(0x1DF15, None, "LATIN SMALL LETTER TURNED R WITH PALATAL HOOK", 0x31, "Latin_Ext_G"),
    c(0x1DF16, None, "LATIN SMALL LETTER R WITH FISHHOOK AND PALATAL HOOK", 0x31, "Latin_Ext_G"),
    c(0x1DF17, None, "LATIN SMALL LETTER TESH DIGRAPH WITH PALATAL HOOK", 0x31, "Latin_Ext_G"),
    c(0x1DF18, None, "LATIN SMALL LETTER EZH WITH PALATAL HOOK", 0x31, "Latin_Ext_G"),
    c(0x1DF19, None, "LATIN SMALL LETTER DEZH DIGRAPH WITH RETROFLEX HOOK", 0x31, "Latin_Ext_G"),
    c(0x1DF1A, None, "LATIN SMALL LETTER I WITH STROKE AND RETROFLEX HOOK", 0x31, "Latin_Ext_G"),
    c(0x1DF1B, None, "LATIN SMALL LETTER O WITH RETROFLEX HOOK", 0x31, "Latin_Ext_G"),
    c(0x1DF1C, None, "LATIN SMALL LETTER TESH DIGRAPH WITH RETROFLEX HOOK", 0x31, "Latin_Ext_G"),
    c(0x1DF1D, None, "LATIN SMALL LETTER C WITH RETROFLEX HOOK", 0x31, "Latin_Ext_G"),
    c(0x1DF1E, None, "LATIN SMALL LETTER S WITH CURL", 0x31, "Latin_Ext_G"),
    c(0x1E000, None, "COMBINING GLAGOLITIC LETTER AZU", 0x21, "Glagolitic_Sup"),
    c(0x1E001, None, "COMBINING GLAGOLITIC LETTER BUKY", 0x21, "Glagolitic_Sup"),
    c(0x1E002, None, "COMBINING GLAGOLITIC LETTER VEDE", 0x21, "Glagolitic_Sup"),
    c(0x1E003, None, "COMBINING GLAGOLITIC LETTER GLAGOLI", 0x21, "Glagolitic_Sup"),
    c(0x1E004, None, "COMBINING GLAGOLITIC LETTER DOBRO", 0x21, "Glagolitic_Sup"),
    c(0x1E005, None, "COMBINING GLAGOLITIC LETTER YESTU", 0x21, "Glagolitic_Sup"),
    c(0x1E006, None, "COMBINING GLAGOLITIC LETTER ZHIVETE", 0x21, "Glagolitic_Sup"),
    c(0x1E008, None, "COMBINING GLAGOLITIC LETTER ZEMLJA", 0x21, "Glagolitic_Sup"),
    c(0x1E009, None, "COMBINING GLAGOLITIC LETTER IZHE", 0x21, "Glagolitic_Sup"),
    c(0x1E00A, None, "COMBINING GLAGOLITIC LETTER INITIAL IZHE", 0x21, "Glagolitic_Sup"),
    c(0x1E00B, None, "COMBINING GLAGOLITIC LETTER I", 0x21, "Glagolitic_Sup"),
    c(0x1E00C, None, "COMBINING GLAGOLITIC LETTER DJERVI", 0x21, "Glagolitic_Sup"),
    c(0x1E00D, None, "COMBINING GLAGOLITIC LETTER KAKO", 0x21, "Glagolitic_Sup"),
    c(0x1E00E, None, "COMBINING GLAGOLITIC LETTER LJUDIJE", 0x21, "Glagolitic_Sup"),
    c(0x1E00F, None, "COMBINING GLAGOLITIC LETTER MYSLITE", 0x21, "Glagolitic_Sup"),
    c(0x1E010, None, "COMBINING GLAGOLITIC LETTER NASHI", 0x21, "Glagolitic_Sup"),
    c(0x1E011, None, "COMBINING GLAGOLITIC LETTER ONU", 0x21, "Glagolitic_Sup"),
    c(0x1E012, None, "COMBINING GLAGOLITIC LETTER POKOJI", 0x21, "Glagolitic_Sup"),
    c(0x1E013, None, "COMBINING GLAGOLITIC LETTER RITSI", 0x21, "Glagolitic_Sup"),
    c(0x1E014, None, "COMBINING GLAGOLITIC LETTER SLOVO", 0x21, "Glagolitic_Sup"),
    c(0x1E015, None, "COMBINING GLAGOLITIC LETTER TVRIDO", 0x21, "Glagolitic_Sup"),
    c(0x1E016, None, "COMBINING GLAGOLITIC LETTER UKU", 0x21, "Glagolitic_Sup"),
    c(0x1E017, None, "COMBINING GLAGOLITIC LETTER FRITU", 0x21, "Glagolitic_Sup"),
    c(0x1E018, None, "COMBINING GLAGOLITIC LETTER HERU", 0x21, "Glagolitic_Sup"),
    c(0x1E01B, None, "COMBINING GLAGOLITIC LETTER SHTA", 0x21, "Glagolitic_Sup"),
    c(0x1E01C, None, "COMBINING GLAGOLITIC LETTER TSI", 0x21, "Glagolitic_Sup"),
    c(0x1E01D, None, "COMBINING GLAGOLITIC LETTER CHRIVI", 0x21, "Glagolitic_Sup"),
    c(0x1E01E, None, "COMBINING GLAGOLITIC LETTER SHA", 0x21, "Glagolitic_Sup"),
    c(0x1E01F, None, "COMBINING GLAGOLITIC LETTER YERU", 0x21, "Glagolitic_Sup"),
    c(0x1E020, None, "COMBINING GLAGOLITIC LETTER YERI", 0x21, "Glagolitic_Sup"),
    c(0x1E021, None, "COMBINING GLAGOLITIC LETTER YATI", 0x21, "Glagolitic_Sup"),
    c(0x1E023, None, "COMBINING GLAGOLITIC LETTER YU", 0x21, "Glagolitic_Sup"),
    c(0x1E024, None, "COMBINING GLAGOLITIC LETTER SMALL YUS", 0x21, "Glagolitic_Sup"),
    c(0x1E026, None, "COMBINING GLAGOLITIC LETTER YO", 0x21, "Glagolitic_Sup"),
    c(0x1E027, None, "COMBINING GLAGOLITIC LETTER IOTATED SMALL YUS", 0x21, "Glagolitic_Sup"),
    c(0x1E028, None, "COMBINING GLAGOLITIC LETTER BIG YUS", 0x21, "Glagolitic_Sup"),
    c(0x1E029, None, "COMBINING GLAGOLITIC LETTER IOTATED BIG YUS", 0x21, "Glagolitic_Sup"),
    c(0x1E02A, None, "COMBINING GLAGOLITIC LETTER FITA", 0x21, "Glagolitic_Sup"),
    c(0x1E100, None, "NYIAKENG PUACHUE HMONG LETTER MA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E101, None, "NYIAKENG PUACHUE HMONG LETTER TSA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E102, None, "NYIAKENG PUACHUE HMONG LETTER NTA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E103, None, "NYIAKENG PUACHUE HMONG LETTER TA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E104, None, "NYIAKENG PUACHUE HMONG LETTER HA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E105, None, "NYIAKENG PUACHUE HMONG LETTER NA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E106, None, "NYIAKENG PUACHUE HMONG LETTER XA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E107, None, "NYIAKENG PUACHUE HMONG LETTER NKA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E108, None, "NYIAKENG PUACHUE HMONG LETTER CA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E109, None, "NYIAKENG PUACHUE HMONG LETTER LA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E10A, None, "NYIAKENG PUACHUE HMONG LETTER SA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E10B, None, "NYIAKENG PUACHUE HMONG LETTER ZA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E10C, None, "NYIAKENG PUACHUE HMONG LETTER NCA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E10D, None, "NYIAKENG PUACHUE HMONG LETTER NTSA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E10E, None, "NYIAKENG PUACHUE HMONG LETTER KA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E10F, None, "NYIAKENG PUACHUE HMONG LETTER DA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E110, None, "NYIAKENG PUACHUE HMONG LETTER NYA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E111, None, "NYIAKENG PUACHUE HMONG LETTER NRA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E112, None, "NYIAKENG PUACHUE HMONG LETTER VA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E113, None, "NYIAKENG PUACHUE HMONG LETTER NTXA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E114, None, "NYIAKENG PUACHUE HMONG LETTER TXA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E115, None, "NYIAKENG PUACHUE HMONG LETTER FA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E116, None, "NYIAKENG PUACHUE HMONG LETTER RA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E117, None, "NYIAKENG PUACHUE HMONG LETTER QA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E118, None, "NYIAKENG PUACHUE HMONG LETTER YA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E119, None, "NYIAKENG PUACHUE HMONG LETTER NQA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E11A, None, "NYIAKENG PUACHUE HMONG LETTER PA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E11B, None, "NYIAKENG PUACHUE HMONG LETTER XYA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E11C, None, "NYIAKENG PUACHUE HMONG LETTER NPA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E11D, None, "NYIAKENG PUACHUE HMONG LETTER DLA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E11E, None, "NYIAKENG PUACHUE HMONG LETTER NPLA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E11F, None, "NYIAKENG PUACHUE HMONG LETTER HAH", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E120, None, "NYIAKENG PUACHUE HMONG LETTER MLA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E121, None, "NYIAKENG PUACHUE HMONG LETTER PLA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E122, None, "NYIAKENG PUACHUE HMONG LETTER GA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E123, None, "NYIAKENG PUACHUE HMONG LETTER RRA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E124, None, "NYIAKENG PUACHUE HMONG LETTER A", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E125, None, "NYIAKENG PUACHUE HMONG LETTER AA", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E126, None, "NYIAKENG PUACHUE HMONG LETTER I", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E127, None, "NYIAKENG PUACHUE HMONG LETTER U", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E128, None, "NYIAKENG PUACHUE HMONG LETTER O", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E129, None, "NYIAKENG PUACHUE HMONG LETTER OO", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E12A, None, "NYIAKENG PUACHUE HMONG LETTER E", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E12B, None, "NYIAKENG PUACHUE HMONG LETTER EE", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E12C, None, "NYIAKENG PUACHUE HMONG LETTER W", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E130, None, "NYIAKENG PUACHUE HMONG TONE-B", 0x20, "Nyiakeng_Puachue_Hmong"),
    c(0x1E131, None, "NYIAKENG PUACHUE HMONG TONE-M", 0x20, "Nyiakeng_Puachue_Hmong"),
    c(0x1E132, None, "NYIAKENG PUACHUE HMONG TONE-J", 0x20, "Nyiakeng_Puachue_Hmong"),
    c(0x1E133, None, "NYIAKENG PUACHUE HMONG TONE-V", 0x20, "Nyiakeng_Puachue_Hmong"),
    c(0x1E134, None, "NYIAKENG PUACHUE HMONG TONE-S", 0x20, "Nyiakeng_Puachue_Hmong"),
    c(0x1E135, None, "NYIAKENG PUACHUE HMONG TONE-G", 0x20, "Nyiakeng_Puachue_Hmong"),
    c(0x1E136, None, "NYIAKENG PUACHUE HMONG TONE-D", 0x20, "Nyiakeng_Puachue_Hmong"),
    c(0x1E137, None, "NYIAKENG PUACHUE HMONG SIGN FOR PERSON", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E138, None, "NYIAKENG PUACHUE HMONG SIGN FOR THING", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E139, None, "NYIAKENG PUACHUE HMONG SIGN FOR LOCATION", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E13A, None, "NYIAKENG PUACHUE HMONG SIGN FOR ANIMAL", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E13B, None, "NYIAKENG PUACHUE HMONG SIGN FOR INVERTEBRATE", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E13C, None, "NYIAKENG PUACHUE HMONG SIGN XW XW", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E13D, None, "NYIAKENG PUACHUE HMONG SYLLABLE LENGTHENER", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E140, None, "NYIAKENG PUACHUE HMONG DIGIT ZERO", 0x20, "Nyiakeng_Puachue_Hmong"),
    c(0x1E141, None, "NYIAKENG PUACHUE HMONG DIGIT ONE", 0x20, "Nyiakeng_Puachue_Hmong"),
    c(0x1E142, None, "NYIAKENG PUACHUE HMONG DIGIT TWO", 0x20, "Nyiakeng_Puachue_Hmong"),
    c(0x1E143, None, "NYIAKENG PUACHUE HMONG DIGIT THREE", 0x20, "Nyiakeng_Puachue_Hmong"),
    c(0x1E144, None, "NYIAKENG PUACHUE HMONG DIGIT FOUR", 0x20, "Nyiakeng_Puachue_Hmong"),
    c(0x1E145, None, "NYIAKENG PUACHUE HMONG DIGIT FIVE", 0x20, "Nyiakeng_Puachue_Hmong"),
    c(0x1E146, None, "NYIAKENG PUACHUE HMONG DIGIT SIX", 0x20, "Nyiakeng_Puachue_Hmong"),
    c(0x1E147, None, "NYIAKENG PUACHUE HMONG DIGIT SEVEN", 0x20, "Nyiakeng_Puachue_Hmong"),
    c(0x1E148, None, "NYIAKENG PUACHUE HMONG DIGIT EIGHT", 0x20, "Nyiakeng_Puachue_Hmong"),
    c(0x1E149, None, "NYIAKENG PUACHUE HMONG DIGIT NINE", 0x20, "Nyiakeng_Puachue_Hmong"),
    c(0x1E14E, None, "NYIAKENG PUACHUE HMONG LOGOGRAM NYAJ", 0x31, "Nyiakeng_Puachue_Hmong"),
    c(0x1E14F, None, "NYIAKENG PUACHUE HMONG CIRCLED CA", 0x00, "Nyiakeng_Puachue_Hmong"),
    c(0x1E290, None, "TOTO LETTER PA", 0x31, "Toto"),
    c(0x1E291, None, "TOTO LETTER BA", 0x31, "Toto"),
    c(0x1E292, None, "TOTO LETTER TA", 0x31, "Toto"),
    c(0x1E293, None, "TOTO LETTER DA", 0x31, "Toto"),
    c(0x1E294, None, "TOTO LETTER KA", 0x31, "Toto"),
    c(0x1E295, None, "TOTO LETTER GA", 0x31, "Toto"),
    c(0x1E296, None, "TOTO LETTER MA", 0x31, "Toto"),
    c(0x1E297, None, "TOTO LETTER NA", 0x31, "Toto"),
    c(0x1E298, None, "TOTO LETTER NGA", 0x31, "Toto"),
    c(0x1E299, None, "TOTO LETTER SA", 0x31, "Toto"),
    c(0x1E29A, None, "TOTO LETTER CHA", 0x31, "Toto"),
    c(0x1E29B, None, "TOTO LETTER YA", 0x31, "Toto"),
    c(0x1E29C, None, "TOTO LETTER WA", 0x31, "Toto"),
    c(0x1E29D, None, "TOTO LETTER JA", 0x31, "Toto"),
    c(0x1E29E, None, "TOTO LETTER HA", 0x31, "Toto"),
    c(0x1E29F, None, "TOTO LETTER RA", 0x31, "Toto"),
    c(0x1E2A0, None, "TOTO LETTER LA", 0x31, "Toto"),
    c(0x1E2A1, None, "TOTO LETTER I", 0x31, "Toto"),
    c(0x1E2A2, None, "TOTO LETTER BREATHY I", 0x31, "Toto"),
    c(0x1E2A3, None, "TOTO LETTER IU", 0x31, "Toto"),
    c(0x1E2A4, None, "TOTO LETTER BREATHY IU", 0x31, "Toto"),
    c(0x1E2A5, None, "TOTO LETTER U", 0x31, "Toto"),
    c(0x1E2A6, None, "TOTO LETTER E", 0x31, "Toto"),
    c(0x1E2A7, None, "TOTO LETTER BREATHY E", 0x31, "Toto"),
    c(0x1E2A8, None, "TOTO LETTER EO", 0x31, "Toto"),
    c(0x1E2A9, None, "TOTO LETTER BREATHY EO", 0x31, "Toto"),
    c(0x1E2AA, None, "TOTO LETTER O", 0x31, "Toto"),
    c(0x1E2AB, None, "TOTO LETTER AE", 0x31, "Toto"),
    c(0x1E2AC, None, "TOTO LETTER BREATHY AE", 0x31, "Toto"),
    c(0x1E2AD, None, "TOTO LETTER A", 0x31, "Toto"),
    c(0x1E2AE, None, "TOTO SIGN RISING TONE", 0x20, "Toto"),
    c(0x1E2C0, None, "WANCHO LETTER AA", 0x31, "Wancho"),
    c(0x1E2C1, None, "WANCHO LETTER A", 0x31, "Wancho"),
    c(0x1E2C2, None, "WANCHO LETTER BA", 0x31, "Wancho"),
    c(0x1E2C3, None, "WANCHO LETTER CA", 0x31, "Wancho"),
    c(0x1E2C4, None, "WANCHO LETTER DA", 0x31, "Wancho"),
    c(0x1E2C5, None, "WANCHO LETTER GA", 0x31, "Wancho"),
    c(0x1E2C6, None, "WANCHO LETTER YA", 0x31, "Wancho"),
    c(0x1E2C7, None, "WANCHO LETTER PHA", 0x31, "Wancho"),
    c(0x1E2C8, None, "WANCHO LETTER LA", 0x31, "Wancho"),
    c(0x1E2C9, None, "WANCHO LETTER NA", 0x31, "Wancho"),
    c(0x1E2CA, None, "WANCHO LETTER PA", 0x31, "Wancho"),
    c(0x1E2CB, None, "WANCHO LETTER TA", 0x31, "Wancho"),
    c(0x1E2CC, None, "WANCHO LETTER THA", 0x31, "Wancho"),
    c(0x1E2CD, None, "WANCHO LETTER FA", 0x31, "Wancho"),
    c(0x1E2CE, None, "WANCHO LETTER SA", 0x31, "Wancho"),
    c(0x1E2CF, None, "WANCHO LETTER SHA", 0x31, "Wancho"),
    c(0x1E2D0, None, "WANCHO LETTER JA", 0x31, "Wancho"),
    c(0x1E2D1, None, "WANCHO LETTER ZA", 0x31, "Wancho"),
    c(0x1E2D2, None, "WANCHO LETTER WA", 0x31, "Wancho"),
    c(0x1E2D3, None, "WANCHO LETTER VA", 0x31, "Wancho"),
    c(0x1E2D4, None, "WANCHO LETTER KA", 0x31, "Wancho"),
    c(0x1E2D5, None, "WANCHO LETTER O", 0x31, "Wancho"),
    c(0x1E2D6, None, "WANCHO LETTER AU", 0x31, "Wancho"),
    c(0x1E2D7, None, "WANCHO LETTER RA", 0x31, "Wancho"),
    c(0x1E2D8, None, "WANCHO LETTER MA", 0x31, "Wancho"),
    c(0x1E2D9, None, "WANCHO LETTER KHA", 0x31, "Wancho"),
    c(0x1E2DA, None, "WANCHO LETTER HA", 0x31, "Wancho"),
    c(0x1E2DB, None, "WANCHO LETTER E", 0x31, "Wancho"),
    c(0x1E2DC, None, "WANCHO LETTER I", 0x31, "Wancho"),
    c(0x1E2DD, None, "WANCHO LETTER NGA", 0x31, "Wancho"),
    c(0x1E2DE, None, "WANCHO LETTER U", 0x31, "Wancho"),
    c(0x1E2DF, None, "WANCHO LETTER LLHA", 0x31, "Wancho"),
    c(0x1E2E0, None, "WANCHO LETTER TSA", 0x31, "Wancho"),
    c(0x1E2E1, None, "WANCHO LETTER TRA", 0x31, "Wancho"),
    c(0x1E2E2, None, "WANCHO LETTER ONG", 0x31, "Wancho"),
    c(0x1E2E3, None, "WANCHO LETTER AANG", 0x31, "Wancho"),
    c(0x1E2E4, None, "WANCHO LETTER ANG", 0x31, "Wancho"),
    c(0x1E2E5, None, "WANCHO LETTER ING", 0x31, "Wancho"),
    c(0x1E2E6, None, "WANCHO LETTER ON", 0x31, "Wancho"),
    c(0x1E2E7, None, "WANCHO LETTER EN", 0x31, "Wancho"),
    c(0x1E2E8, None, "WANCHO LETTER AAN", 0x31, "Wancho"),
    c(0x1E2E9, None, "WANCHO LETTER NYA", 0x31, "Wancho"),
    c(0x1E2EA, None, "WANCHO LETTER UEN", 0x31, "Wancho"),
    c(0x1E2EB, None, "WANCHO LETTER YIH", 0x31, "Wancho"),
    c(0x1E2EC, None, "WANCHO TONE TUP", 0x20, "Wancho"),
    c(0x1E2ED, None, "WANCHO TONE TUPNI", 0x20, "Wancho"),
    c(0x1E2EE, None, "WANCHO TONE KOI", 0x20, "Wancho"),
    c(0x1E2EF, None, "WANCHO TONE KOINI", 0x20, "Wancho"),
    c(0x1E2F0, None, "WANCHO DIGIT ZERO", 0x20, "Wancho"),
    c(0x1E2F1, None, "WANCHO DIGIT ONE", 0x20, "Wancho"),
    c(0x1E2F2, None, "WANCHO DIGIT TWO", 0x20, "Wancho"),
    c(0x1E2F3, None, "WANCHO DIGIT THREE", 0x20, "Wancho"),
    c(0x1E2F4, None, "WANCHO DIGIT FOUR", 0x20, "Wancho"),
    c(0x1E2F5, None, "WANCHO DIGIT FIVE", 0x20, "Wancho"),
    c(0x1E2F6, None, "WANCHO DIGIT SIX", 0x20, "Wancho"),
    c(0x1E2F7, None, "WANCHO DIGIT SEVEN", 0x20, "Wancho"),
    c(0x1E2F8, None, "WANCHO DIGIT EIGHT", 0x20, "Wancho"),
    c(0x1E2F9, None, "WANCHO DIGIT NINE", 0x20, "Wancho"),
    c(0x1E2FF, None, "WANCHO NGUN SIGN", 0x00, "Wancho"),
    c(0x1E7E0, None, "ETHIOPIC SYLLABLE HHYA", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7E1, None, "ETHIOPIC SYLLABLE HHYU", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7E2, None, "ETHIOPIC SYLLABLE HHYI", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7E3, None, "ETHIOPIC SYLLABLE HHYAA", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7E4, None, "ETHIOPIC SYLLABLE HHYEE", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7E5, None, "ETHIOPIC SYLLABLE HHYE", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7E6, None, "ETHIOPIC SYLLABLE HHYO", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7E8, None, "ETHIOPIC SYLLABLE GURAGE HHWA", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7E9, None, "ETHIOPIC SYLLABLE HHWI", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7EA, None, "ETHIOPIC SYLLABLE HHWEE", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7EB, None, "ETHIOPIC SYLLABLE HHWE", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7ED, None, "ETHIOPIC SYLLABLE GURAGE MWI", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7EE, None, "ETHIOPIC SYLLABLE GURAGE MWEE", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7F0, None, "ETHIOPIC SYLLABLE GURAGE QWI", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7F1, None, "ETHIOPIC SYLLABLE GURAGE QWEE", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7F2, None, "ETHIOPIC SYLLABLE GURAGE QWE", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7F3, None, "ETHIOPIC SYLLABLE GURAGE BWI", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7F4, None, "ETHIOPIC SYLLABLE GURAGE BWEE", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7F5, None, "ETHIOPIC SYLLABLE GURAGE KWI", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7F6, None, "ETHIOPIC SYLLABLE GURAGE KWEE", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7F7, None, "ETHIOPIC SYLLABLE GURAGE KWE", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7F8, None, "ETHIOPIC SYLLABLE GURAGE GWI", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7F9, None, "ETHIOPIC SYLLABLE GURAGE GWEE", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7FA, None, "ETHIOPIC SYLLABLE GURAGE GWE", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7FB, None, "ETHIOPIC SYLLABLE GURAGE FWI", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7FC, None, "ETHIOPIC SYLLABLE GURAGE FWEE", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7FD, None, "ETHIOPIC SYLLABLE GURAGE PWI", 0x31, "Ethiopic_Ext_B"),
    c(0x1E7FE, None, "ETHIOPIC SYLLABLE GURAGE PWEE", 0x31, "Ethiopic_Ext_B"),
    c(0x1E800, None, "MENDE KIKAKUI SYLLABLE M001 KI", 0x31, "Mende_Kikakui"),
    c(0x1E801, None, "MENDE KIKAKUI SYLLABLE M002 KA", 0x31, "Mende_Kikakui"),
    c(0x1E802, None, "MENDE KIKAKUI SYLLABLE M003 KU", 0x31, "Mende_Kikakui"),
    c(0x1E803, None, "MENDE KIKAKUI SYLLABLE M065 KEE", 0x31, "Mende_Kikakui"),
    c(0x1E804, None, "MENDE KIKAKUI SYLLABLE M095 KE", 0x31, "Mende_Kikakui"),
    c(0x1E805, None, "MENDE KIKAKUI SYLLABLE M076 KOO", 0x31, "Mende_Kikakui"),
    c(0x1E806, None, "MENDE KIKAKUI SYLLABLE M048 KO", 0x31, "Mende_Kikakui"),
    c(0x1E807, None, "MENDE KIKAKUI SYLLABLE M179 KUA", 0x31, "Mende_Kikakui"),
    c(0x1E808, None, "MENDE KIKAKUI SYLLABLE M004 WI", 0x31, "Mende_Kikakui"),
    c(0x1E809, None, "MENDE KIKAKUI SYLLABLE M005 WA", 0x31, "Mende_Kikakui"),
    c(0x1E80A, None, "MENDE KIKAKUI SYLLABLE M006 WU", 0x31, "Mende_Kikakui"),
    c(0x1E80B, None, "MENDE KIKAKUI SYLLABLE M126 WEE", 0x31, "Mende_Kikakui"),
    c(0x1E80C, None, "MENDE KIKAKUI SYLLABLE M118 WE", 0x31, "Mende_Kikakui"),
    c(0x1E80D, None, "MENDE KIKAKUI SYLLABLE M114 WOO", 0x31, "Mende_Kikakui"),
    c(0x1E80E, None, "MENDE KIKAKUI SYLLABLE M045 WO", 0x31, "Mende_Kikakui"),
    c(0x1E80F, None, "MENDE KIKAKUI SYLLABLE M194 WUI", 0x31, "Mende_Kikakui"),
    c(0x1E810, None, "MENDE KIKAKUI SYLLABLE M143 WEI", 0x31, "Mende_Kikakui"),
    c(0x1E811, None, "MENDE KIKAKUI SYLLABLE M061 WVI", 0x31, "Mende_Kikakui"),
    c(0x1E812, None, "MENDE KIKAKUI SYLLABLE M049 WVA", 0x31, "Mende_Kikakui"),
    c(0x1E813, None, "MENDE KIKAKUI SYLLABLE M139 WVE", 0x31, "Mende_Kikakui"),
    c(0x1E814, None, "MENDE KIKAKUI SYLLABLE M007 MIN", 0x31, "Mende_Kikakui"),
    c(0x1E815, None, "MENDE KIKAKUI SYLLABLE M008 MAN", 0x31, "Mende_Kikakui"),
    c(0x1E816, None, "MENDE KIKAKUI SYLLABLE M009 MUN", 0x31, "Mende_Kikakui"),
    c(0x1E817, None, "MENDE KIKAKUI SYLLABLE M059 MEN", 0x31, "Mende_Kikakui"),
    c(0x1E818, None, "MENDE KIKAKUI SYLLABLE M094 MON", 0x31, "Mende_Kikakui"),
    c(0x1E819, None, "MENDE KIKAKUI SYLLABLE M154 MUAN", 0x31, "Mende_Kikakui"),
    c(0x1E81A, None, "MENDE KIKAKUI SYLLABLE M189 MUEN", 0x31, "Mende_Kikakui"),
    c(0x1E81B, None, "MENDE KIKAKUI SYLLABLE M010 BI", 0x31, "Mende_Kikakui"),
    c(0x1E81C, None, "MENDE KIKAKUI SYLLABLE M011 BA", 0x31, "Mende_Kikakui"),
    c(0x1E81D, None, "MENDE KIKAKUI SYLLABLE M012 BU", 0x31, "Mende_Kikakui"),
    c(0x1E81E, None, "MENDE KIKAKUI SYLLABLE M150 BEE", 0x31, "Mende_Kikakui"),
    c(0x1E81F, None, "MENDE KIKAKUI SYLLABLE M097 BE", 0x31, "Mende_Kikakui"),
    c(0x1E820, None, "MENDE KIKAKUI SYLLABLE M103 BOO", 0x31, "Mende_Kikakui"),
    c(0x1E821, None, "MENDE KIKAKUI SYLLABLE M138 BO", 0x31, "Mende_Kikakui"),
    c(0x1E822, None, "MENDE KIKAKUI SYLLABLE M013 I", 0x31, "Mende_Kikakui"),
    c(0x1E823, None, "MENDE KIKAKUI SYLLABLE M014 A", 0x31, "Mende_Kikakui"),
    c(0x1E824, None, "MENDE KIKAKUI SYLLABLE M015 U", 0x31, "Mende_Kikakui"),
    c(0x1E825, None, "MENDE KIKAKUI SYLLABLE M163 EE", 0x31, "Mende_Kikakui"),
    c(0x1E826, None, "MENDE KIKAKUI SYLLABLE M100 E", 0x31, "Mende_Kikakui"),
    c(0x1E827, None, "MENDE KIKAKUI SYLLABLE M165 OO", 0x31, "Mende_Kikakui"),
    c(0x1E828, None, "MENDE KIKAKUI SYLLABLE M147 O", 0x31, "Mende_Kikakui"),
    c(0x1E829, None, "MENDE KIKAKUI SYLLABLE M137 EI", 0x31, "Mende_Kikakui"),
    c(0x1E82A, None, "MENDE KIKAKUI SYLLABLE M131 IN", 0x31, "Mende_Kikakui"),
    c(0x1E82B, None, "MENDE KIKAKUI SYLLABLE M135 IN", 0x31, "Mende_Kikakui"),
    c(0x1E82C, None, "MENDE KIKAKUI SYLLABLE M195 AN", 0x31, "Mende_Kikakui"),
    c(0x1E82D, None, "MENDE KIKAKUI SYLLABLE M178 EN", 0x31, "Mende_Kikakui"),
    c(0x1E82E, None, "MENDE KIKAKUI SYLLABLE M019 SI", 0x31, "Mende_Kikakui"),
    c(0x1E82F, None, "MENDE KIKAKUI SYLLABLE M020 SA", 0x31, "Mende_Kikakui"),
    c(0x1E830, None, "MENDE KIKAKUI SYLLABLE M021 SU", 0x31, "Mende_Kikakui"),
    c(0x1E831, None, "MENDE KIKAKUI SYLLABLE M162 SEE", 0x31, "Mende_Kikakui"),
    c(0x1E832, None, "MENDE KIKAKUI SYLLABLE M116 SE", 0x31, "Mende_Kikakui"),
    c(0x1E833, None, "MENDE KIKAKUI SYLLABLE M136 SOO", 0x31, "Mende_Kikakui"),
    c(0x1E834, None, "MENDE KIKAKUI SYLLABLE M079 SO", 0x31, "Mende_Kikakui"),
    c(0x1E835, None, "MENDE KIKAKUI SYLLABLE M196 SIA", 0x31, "Mende_Kikakui"),
    c(0x1E836, None, "MENDE KIKAKUI SYLLABLE M025 LI", 0x31, "Mende_Kikakui"),
    c(0x1E837, None, "MENDE KIKAKUI SYLLABLE M026 LA", 0x31, "Mende_Kikakui"),
    c(0x1E838, None, "MENDE KIKAKUI SYLLABLE M027 LU", 0x31, "Mende_Kikakui"),
    c(0x1E839, None, "MENDE KIKAKUI SYLLABLE M084 LEE", 0x31, "Mende_Kikakui"),
    c(0x1E83A, None, "MENDE KIKAKUI SYLLABLE M073 LE", 0x31, "Mende_Kikakui"),
    c(0x1E83B, None, "MENDE KIKAKUI SYLLABLE M054 LOO", 0x31, "Mende_Kikakui"),
    c(0x1E83C, None, "MENDE KIKAKUI SYLLABLE M153 LO", 0x31, "Mende_Kikakui"),
    c(0x1E83D, None, "MENDE KIKAKUI SYLLABLE M110 LONG LE", 0x31, "Mende_Kikakui"),
    c(0x1E83E, None, "MENDE KIKAKUI SYLLABLE M016 DI", 0x31, "Mende_Kikakui"),
    c(0x1E83F, None, "MENDE KIKAKUI SYLLABLE M017 DA", 0x31, "Mende_Kikakui"),
    c(0x1E840, None, "MENDE KIKAKUI SYLLABLE M018 DU", 0x31, "Mende_Kikakui"),
    c(0x1E841, None, "MENDE KIKAKUI SYLLABLE M089 DEE", 0x31, "Mende_Kikakui"),
    c(0x1E842, None, "MENDE KIKAKUI SYLLABLE M180 DOO", 0x31, "Mende_Kikakui"),
    c(0x1E843, None, "MENDE KIKAKUI SYLLABLE M181 DO", 0x31, "Mende_Kikakui"),
    c(0x1E844, None, "MENDE KIKAKUI SYLLABLE M022 TI", 0x31, "Mende_Kikakui"),
    c(0x1E845, None, "MENDE KIKAKUI SYLLABLE M023 TA", 0x31, "Mende_Kikakui"),
    c(0x1E846, None, "MENDE KIKAKUI SYLLABLE M024 TU", 0x31, "Mende_Kikakui"),
    c(0x1E847, None, "MENDE KIKAKUI SYLLABLE M091 TEE", 0x31, "Mende_Kikakui"),
    c(0x1E848, None, "MENDE KIKAKUI SYLLABLE M055 TE", 0x31, "Mende_Kikakui"),
    c(0x1E849, None, "MENDE KIKAKUI SYLLABLE M104 TOO", 0x31, "Mende_Kikakui"),
    c(0x1E84A, None, "MENDE KIKAKUI SYLLABLE M069 TO", 0x31, "Mende_Kikakui"),
    c(0x1E84B, None, "MENDE KIKAKUI SYLLABLE M028 JI", 0x31, "Mende_Kikakui"),
    c(0x1E84C, None, "MENDE KIKAKUI SYLLABLE M029 JA", 0x31, "Mende_Kikakui"),
    c(0x1E84D, None, "MENDE KIKAKUI SYLLABLE M030 JU", 0x31, "Mende_Kikakui"),
    c(0x1E84E, None, "MENDE KIKAKUI SYLLABLE M157 JEE", 0x31, "Mende_Kikakui"),
    c(0x1E84F, None, "MENDE KIKAKUI SYLLABLE M113 JE", 0x31, "Mende_Kikakui"),
    c(0x1E850, None, "MENDE KIKAKUI SYLLABLE M160 JOO", 0x31, "Mende_Kikakui"),
    c(0x1E851, None, "MENDE KIKAKUI SYLLABLE M063 JO", 0x31, "Mende_Kikakui"),
    c(0x1E852, None, "MENDE KIKAKUI SYLLABLE M175 LONG JO", 0x31, "Mende_Kikakui"),
    c(0x1E853, None, "MENDE KIKAKUI SYLLABLE M031 YI", 0x31, "Mende_Kikakui"),
    c(0x1E854, None, "MENDE KIKAKUI SYLLABLE M032 YA", 0x31, "Mende_Kikakui"),
    c(0x1E855, None, "MENDE KIKAKUI SYLLABLE M033 YU", 0x31, "Mende_Kikakui"),
    c(0x1E856, None, "MENDE KIKAKUI SYLLABLE M109 YEE", 0x31, "Mende_Kikakui"),
    c(0x1E857, None, "MENDE KIKAKUI SYLLABLE M080 YE", 0x31, "Mende_Kikakui"),
    c(0x1E858, None, "MENDE KIKAKUI SYLLABLE M141 YOO", 0x31, "Mende_Kikakui"),
    c(0x1E859, None, "MENDE KIKAKUI SYLLABLE M121 YO", 0x31, "Mende_Kikakui"),
    c(0x1E85A, None, "MENDE KIKAKUI SYLLABLE M034 FI", 0x31, "Mende_Kikakui"),
    c(0x1E85B, None, "MENDE KIKAKUI SYLLABLE M035 FA", 0x31, "Mende_Kikakui"),
    c(0x1E85C, None, "MENDE KIKAKUI SYLLABLE M036 FU", 0x31, "Mende_Kikakui"),
    c(0x1E85D, None, "MENDE KIKAKUI SYLLABLE M078 FEE", 0x31, "Mende_Kikakui"),
    c(0x1E85E, None, "MENDE KIKAKUI SYLLABLE M075 FE", 0x31, "Mende_Kikakui"),
    c(0x1E85F, None, "MENDE KIKAKUI SYLLABLE M133 FOO", 0x31, "Mende_Kikakui"),
    c(0x1E860, None, "MENDE KIKAKUI SYLLABLE M088 FO", 0x31, "Mende_Kikakui"),
    c(0x1E861, None, "MENDE KIKAKUI SYLLABLE M197 FUA", 0x31, "Mende_Kikakui"),
    c(0x1E862, None, "MENDE KIKAKUI SYLLABLE M101 FAN", 0x31, "Mende_Kikakui"),
    c(0x1E863, None, "MENDE KIKAKUI SYLLABLE M037 NIN", 0x31, "Mende_Kikakui"),
    c(0x1E864, None, "MENDE KIKAKUI SYLLABLE M038 NAN", 0x31, "Mende_Kikakui"),
    c(0x1E865, None, "MENDE KIKAKUI SYLLABLE M039 NUN", 0x31, "Mende_Kikakui"),
    c(0x1E866, None, "MENDE KIKAKUI SYLLABLE M117 NEN", 0x31, "Mende_Kikakui"),
    c(0x1E867, None, "MENDE KIKAKUI SYLLABLE M169 NON", 0x31, "Mende_Kikakui"),
    c(0x1E868, None, "MENDE KIKAKUI SYLLABLE M176 HI", 0x31, "Mende_Kikakui"),
    c(0x1E869, None, "MENDE KIKAKUI SYLLABLE M041 HA", 0x31, "Mende_Kikakui"),
    c(0x1E86A, None, "MENDE KIKAKUI SYLLABLE M186 HU", 0x31, "Mende_Kikakui"),
    c(0x1E86B, None, "MENDE KIKAKUI SYLLABLE M040 HEE", 0x31, "Mende_Kikakui"),
    c(0x1E86C, None, "MENDE KIKAKUI SYLLABLE M096 HE", 0x31, "Mende_Kikakui"),
    c(0x1E86D, None, "MENDE KIKAKUI SYLLABLE M042 HOO", 0x31, "Mende_Kikakui"),
    c(0x1E86E, None, "MENDE KIKAKUI SYLLABLE M140 HO", 0x31, "Mende_Kikakui"),
    c(0x1E86F, None, "MENDE KIKAKUI SYLLABLE M083 HEEI", 0x31, "Mende_Kikakui"),
    c(0x1E870, None, "MENDE KIKAKUI SYLLABLE M128 HOOU", 0x31, "Mende_Kikakui"),
    c(0x1E871, None, "MENDE KIKAKUI SYLLABLE M053 HIN", 0x31, "Mende_Kikakui"),
    c(0x1E872, None, "MENDE KIKAKUI SYLLABLE M130 HAN", 0x31, "Mende_Kikakui"),
    c(0x1E873, None, "MENDE KIKAKUI SYLLABLE M087 HUN", 0x31, "Mende_Kikakui"),
    c(0x1E874, None, "MENDE KIKAKUI SYLLABLE M052 HEN", 0x31, "Mende_Kikakui"),
    c(0x1E875, None, "MENDE KIKAKUI SYLLABLE M193 HON", 0x31, "Mende_Kikakui"),
    c(0x1E876, None, "MENDE KIKAKUI SYLLABLE M046 HUAN", 0x31, "Mende_Kikakui"),
    c(0x1E877, None, "MENDE KIKAKUI SYLLABLE M090 NGGI", 0x31, "Mende_Kikakui"),
    c(0x1E878, None, "MENDE KIKAKUI SYLLABLE M043 NGGA", 0x31, "Mende_Kikakui"),
    c(0x1E879, None, "MENDE KIKAKUI SYLLABLE M082 NGGU", 0x31, "Mende_Kikakui"),
    c(0x1E87A, None, "MENDE KIKAKUI SYLLABLE M115 NGGEE", 0x31, "Mende_Kikakui"),
    c(0x1E87B, None, "MENDE KIKAKUI SYLLABLE M146 NGGE", 0x31, "Mende_Kikakui"),
    c(0x1E87C, None, "MENDE KIKAKUI SYLLABLE M156 NGGOO", 0x31, "Mende_Kikakui"),
    c(0x1E87D, None, "MENDE KIKAKUI SYLLABLE M120 NGGO", 0x31, "Mende_Kikakui"),
    c(0x1E87E, None, "MENDE KIKAKUI SYLLABLE M159 NGGAA", 0x31, "Mende_Kikakui"),
    c(0x1E87F, None, "MENDE KIKAKUI SYLLABLE M127 NGGUA", 0x31, "Mende_Kikakui"),
    c(0x1E880, None, "MENDE KIKAKUI SYLLABLE M086 LONG NGGE", 0x31, "Mende_Kikakui"),
    c(0x1E881, None, "MENDE KIKAKUI SYLLABLE M106 LONG NGGOO", 0x31, "Mende_Kikakui"),
    c(0x1E882, None, "MENDE KIKAKUI SYLLABLE M183 LONG NGGO", 0x31, "Mende_Kikakui"),
    c(0x1E883, None, "MENDE KIKAKUI SYLLABLE M155 GI", 0x31, "Mende_Kikakui"),
    c(0x1E884, None, "MENDE KIKAKUI SYLLABLE M111 GA", 0x31, "Mende_Kikakui"),
    c(0x1E885, None, "MENDE KIKAKUI SYLLABLE M168 GU", 0x31, "Mende_Kikakui"),
    c(0x1E886, None, "MENDE KIKAKUI SYLLABLE M190 GEE", 0x31, "Mende_Kikakui"),
    c(0x1E887, None, "MENDE KIKAKUI SYLLABLE M166 GUEI", 0x31, "Mende_Kikakui"),
    c(0x1E888, None, "MENDE KIKAKUI SYLLABLE M167 GUAN", 0x31, "Mende_Kikakui"),
    c(0x1E889, None, "MENDE KIKAKUI SYLLABLE M184 NGEN", 0x31, "Mende_Kikakui"),
    c(0x1E88A, None, "MENDE KIKAKUI SYLLABLE M057 NGON", 0x31, "Mende_Kikakui"),
    c(0x1E88B, None, "MENDE KIKAKUI SYLLABLE M177 NGUAN", 0x31, "Mende_Kikakui"),
    c(0x1E88C, None, "MENDE KIKAKUI SYLLABLE M068 PI", 0x31, "Mende_Kikakui"),
    c(0x1E88D, None, "MENDE KIKAKUI SYLLABLE M099 PA", 0x31, "Mende_Kikakui"),
    c(0x1E88E, None, "MENDE KIKAKUI SYLLABLE M050 PU", 0x31, "Mende_Kikakui"),
    c(0x1E88F, None, "MENDE KIKAKUI SYLLABLE M081 PEE", 0x31, "Mende_Kikakui"),
    c(0x1E890, None, "MENDE KIKAKUI SYLLABLE M051 PE", 0x31, "Mende_Kikakui"),
    c(0x1E891, None, "MENDE KIKAKUI SYLLABLE M102 POO", 0x31, "Mende_Kikakui"),
    c(0x1E892, None, "MENDE KIKAKUI SYLLABLE M066 PO", 0x31, "Mende_Kikakui"),
    c(0x1E893, None, "MENDE KIKAKUI SYLLABLE M145 MBI", 0x31, "Mende_Kikakui"),
    c(0x1E894, None, "MENDE KIKAKUI SYLLABLE M062 MBA", 0x31, "Mende_Kikakui"),
    c(0x1E895, None, "MENDE KIKAKUI SYLLABLE M122 MBU", 0x31, "Mende_Kikakui"),
    c(0x1E896, None, "MENDE KIKAKUI SYLLABLE M047 MBEE", 0x31, "Mende_Kikakui"),
    c(0x1E897, None, "MENDE KIKAKUI SYLLABLE M188 MBEE", 0x31, "Mende_Kikakui"),
    c(0x1E898, None, "MENDE KIKAKUI SYLLABLE M072 MBE", 0x31, "Mende_Kikakui"),
    c(0x1E899, None, "MENDE KIKAKUI SYLLABLE M172 MBOO", 0x31, "Mende_Kikakui"),
    c(0x1E89A, None, "MENDE KIKAKUI SYLLABLE M174 MBO", 0x31, "Mende_Kikakui"),
    c(0x1E89B, None, "MENDE KIKAKUI SYLLABLE M187 MBUU", 0x31, "Mende_Kikakui"),
    c(0x1E89C, None, "MENDE KIKAKUI SYLLABLE M161 LONG MBE", 0x31, "Mende_Kikakui"),
    c(0x1E89D, None, "MENDE KIKAKUI SYLLABLE M105 LONG MBOO", 0x31, "Mende_Kikakui"),
    c(0x1E89E, None, "MENDE KIKAKUI SYLLABLE M142 LONG MBO", 0x31, "Mende_Kikakui"),
    c(0x1E89F, None, "MENDE KIKAKUI SYLLABLE M132 KPI", 0x31, "Mende_Kikakui"),
    c(0x1E8A0, None, "MENDE KIKAKUI SYLLABLE M092 KPA", 0x31, "Mende_Kikakui"),
    c(0x1E8A1, None, "MENDE KIKAKUI SYLLABLE M074 KPU", 0x31, "Mende_Kikakui"),
    c(0x1E8A2, None, "MENDE KIKAKUI SYLLABLE M044 KPEE", 0x31, "Mende_Kikakui"),
    c(0x1E8A3, None, "MENDE KIKAKUI SYLLABLE M108 KPE", 0x31, "Mende_Kikakui"),
    c(0x1E8A4, None, "MENDE KIKAKUI SYLLABLE M112 KPOO", 0x31, "Mende_Kikakui"),
    c(0x1E8A5, None, "MENDE KIKAKUI SYLLABLE M158 KPO", 0x31, "Mende_Kikakui"),
    c(0x1E8A6, None, "MENDE KIKAKUI SYLLABLE M124 GBI", 0x31, "Mende_Kikakui"),
    c(0x1E8A7, None, "MENDE KIKAKUI SYLLABLE M056 GBA", 0x31, "Mende_Kikakui"),
    c(0x1E8A8, None, "MENDE KIKAKUI SYLLABLE M148 GBU", 0x31, "Mende_Kikakui"),
    c(0x1E8A9, None, "MENDE KIKAKUI SYLLABLE M093 GBEE", 0x31, "Mende_Kikakui"),
    c(0x1E8AA, None, "MENDE KIKAKUI SYLLABLE M107 GBE", 0x31, "Mende_Kikakui"),
    c(0x1E8AB, None, "MENDE KIKAKUI SYLLABLE M071 GBOO", 0x31, "Mende_Kikakui"),
    c(0x1E8AC, None, "MENDE KIKAKUI SYLLABLE M070 GBO", 0x31, "Mende_Kikakui"),
    c(0x1E8AD, None, "MENDE KIKAKUI SYLLABLE M171 RA", 0x31, "Mende_Kikakui"),
    c(0x1E8AE, None, "MENDE KIKAKUI SYLLABLE M123 NDI", 0x31, "Mende_Kikakui"),
    c(0x1E8AF, None, "MENDE KIKAKUI SYLLABLE M129 NDA", 0x31, "Mende_Kikakui"),
    c(0x1E8B0, None, "MENDE KIKAKUI SYLLABLE M125 NDU", 0x31, "Mende_Kikakui"),
    c(0x1E8B1, None, "MENDE KIKAKUI SYLLABLE M191 NDEE", 0x31, "Mende_Kikakui"),
    c(0x1E8B2, None, "MENDE KIKAKUI SYLLABLE M119 NDE", 0x31, "Mende_Kikakui"),
    c(0x1E8B3, None, "MENDE KIKAKUI SYLLABLE M067 NDOO", 0x31, "Mende_Kikakui"),
    c(0x1E8B4, None, "MENDE KIKAKUI SYLLABLE M064 NDO", 0x31, "Mende_Kikakui"),
    c(0x1E8B5, None, "MENDE KIKAKUI SYLLABLE M152 NJA", 0x31, "Mende_Kikakui"),
    c(0x1E8B6, None, "MENDE KIKAKUI SYLLABLE M192 NJU", 0x31, "Mende_Kikakui"),
    c(0x1E8B7, None, "MENDE KIKAKUI SYLLABLE M149 NJEE", 0x31, "Mende_Kikakui"),
    c(0x1E8B8, None, "MENDE KIKAKUI SYLLABLE M134 NJOO", 0x31, "Mende_Kikakui"),
    c(0x1E8B9, None, "MENDE KIKAKUI SYLLABLE M182 VI", 0x31, "Mende_Kikakui"),
    c(0x1E8BA, None, "MENDE KIKAKUI SYLLABLE M185 VA", 0x31, "Mende_Kikakui"),
    c(0x1E8BB, None, "MENDE KIKAKUI SYLLABLE M151 VU", 0x31, "Mende_Kikakui"),
    c(0x1E8BC, None, "MENDE KIKAKUI SYLLABLE M173 VEE", 0x31, "Mende_Kikakui"),
    c(0x1E8BD, None, "MENDE KIKAKUI SYLLABLE M085 VE", 0x31, "Mende_Kikakui"),
    c(0x1E8BE, None, "MENDE KIKAKUI SYLLABLE M144 VOO", 0x31, "Mende_Kikakui"),
    c(0x1E8BF, None, "MENDE KIKAKUI SYLLABLE M077 VO", 0x31, "Mende_Kikakui"),
    c(0x1E8C0, None, "MENDE KIKAKUI SYLLABLE M164 NYIN", 0x31, "Mende_Kikakui"),
    c(0x1E8C1, None, "MENDE KIKAKUI SYLLABLE M058 NYAN", 0x31, "Mende_Kikakui"),
    c(0x1E8C2, None, "MENDE KIKAKUI SYLLABLE M170 NYUN", 0x31, "Mende_Kikakui"),
    c(0x1E8C3, None, "MENDE KIKAKUI SYLLABLE M098 NYEN", 0x31, "Mende_Kikakui"),
    c(0x1E8C4, None, "MENDE KIKAKUI SYLLABLE M060 NYON", 0x31, "Mende_Kikakui"),
    c(0x1E8C7, None, "MENDE KIKAKUI DIGIT ONE", 0x00, "Mende_Kikakui"),
    c(0x1E8C8, None, "MENDE KIKAKUI DIGIT TWO", 0x00, "Mende_Kikakui"),
    c(0x1E8C9, None, "MENDE KIKAKUI DIGIT THREE", 0x00, "Mende_Kikakui"),
    c(0x1E8CA, None, "MENDE KIKAKUI DIGIT FOUR", 0x00, "Mende_Kikakui"),
    c(0x1E8CB, None, "MENDE KIKAKUI DIGIT FIVE", 0x00, "Mende_Kikakui"),
    c(0x1E8CC, None, "MENDE KIKAKUI DIGIT SIX", 0x00, "Mende_Kikakui"),
    c(0x1E8CD, None, "MENDE KIKAKUI DIGIT SEVEN", 0x00, "Mende_Kikakui"),
    c(0x1E8CE, None, "MENDE KIKAKUI DIGIT EIGHT", 0x00, "Mende_Kikakui"),
    c(0x1E8CF, None, "MENDE KIKAKUI DIGIT NINE", 0x00, "Mende_Kikakui"),
    c(0x1E8D0, None, "MENDE KIKAKUI COMBINING NUMBER TEENS", 0x20, "Mende_Kikakui"),
    c(0x1E8D1, None, "MENDE KIKAKUI COMBINING NUMBER TENS", 0x20, "Mende_Kikakui"),
    c(0x1E8D2, None, "MENDE KIKAKUI COMBINING NUMBER HUNDREDS", 0x20, "Mende_Kikakui"),
    c(0x1E8D3, None, "MENDE KIKAKUI COMBINING NUMBER THOUSANDS", 0x20, "Mende_Kikakui"),
    c(0x1E8D4, None, "MENDE KIKAKUI COMBINING NUMBER TEN THOUSANDS", 0x20, "Mende_Kikakui"),
    c(0x1E8D5, None, "MENDE KIKAKUI COMBINING NUMBER HUNDRED THOUSANDS", 0x20, "Mende_Kikakui"),
    c(0x1E8D6, None, "MENDE KIKAKUI COMBINING NUMBER MILLIONS", 0x20, "Mende_Kikakui"),
    c(0x1E900, None, "ADLAM CAPITAL LETTER ALIF", 0x31, "Adlam"),
    c(0x1E901, None, "ADLAM CAPITAL LETTER DAALI", 0x31, "Adlam"),
    c(0x1E902, None, "ADLAM CAPITAL LETTER LAAM", 0x31, "Adlam"),
    c(0x1E903, None, "ADLAM CAPITAL LETTER MIIM", 0x31, "Adlam"),
    c(0x1E904, None, "ADLAM CAPITAL LETTER BA", 0x31, "Adlam"),
    c(0x1E905, None, "ADLAM CAPITAL LETTER SINNYIIYHE", 0x31, "Adlam"),
    c(0x1E906, None, "ADLAM CAPITAL LETTER PE", 0x31, "Adlam"),
    c(0x1E907, None, "ADLAM CAPITAL LETTER BHE", 0x31, "Adlam"),
    c(0x1E908, None, "ADLAM CAPITAL LETTER RA", 0x31, "Adlam"),
    c(0x1E909, None, "ADLAM CAPITAL LETTER E", 0x31, "Adlam"),
    c(0x1E90A, None, "ADLAM CAPITAL LETTER FA", 0x31, "Adlam"),
    c(0x1E90B, None, "ADLAM CAPITAL LETTER I", 0x31, "Adlam"),
    c(0x1E90C, None, "ADLAM CAPITAL LETTER O", 0x31, "Adlam"),
    c(0x1E90D, None, "ADLAM CAPITAL LETTER DHA", 0x31, "Adlam"),
    c(0x1E90E, None, "ADLAM CAPITAL LETTER YHE", 0x31, "Adlam"),
    c(0x1E90F, None, "ADLAM CAPITAL LETTER WAW", 0x31, "Adlam"),
    c(0x1E910, None, "ADLAM CAPITAL LETTER NUN", 0x31, "Adlam"),
    c(0x1E911, None, "ADLAM CAPITAL LETTER KAF", 0x31, "Adlam"),
    c(0x1E912, None, "ADLAM CAPITAL LETTER YA", 0x31, "Adlam"),
    c(0x1E913, None, "ADLAM CAPITAL LETTER U", 0x31, "Adlam"),
    c(0x1E914, None, "ADLAM CAPITAL LETTER JIIM", 0x31, "Adlam"),
    c(0x1E915, None, "ADLAM CAPITAL LETTER CHI", 0x31, "Adlam"),
    c(0x1E916, None, "ADLAM CAPITAL LETTER HA", 0x31, "Adlam"),
    c(0x1E917, None, "ADLAM CAPITAL LETTER QAAF", 0x31, "Adlam"),
    c(0x1E918, None, "ADLAM CAPITAL LETTER GA", 0x31, "Adlam"),
    c(0x1E919, None, "ADLAM CAPITAL LETTER NYA", 0x31, "Adlam"),
    c(0x1E91A, None, "ADLAM CAPITAL LETTER TU", 0x31, "Adlam"),
    c(0x1E91B, None, "ADLAM CAPITAL LETTER NHA", 0x31, "Adlam"),
    c(0x1E91C, None, "ADLAM CAPITAL LETTER VA", 0x31, "Adlam"),
    c(0x1E91D, None, "ADLAM CAPITAL LETTER KHA", 0x31, "Adlam"),
    c(0x1E91E, None, "ADLAM CAPITAL LETTER GBE", 0x31, "Adlam"),
    c(0x1E91F, None, "ADLAM CAPITAL LETTER ZAL", 0x31, "Adlam"),
    c(0x1E920, None, "ADLAM CAPITAL LETTER KPO", 0x31, "Adlam"),
    c(0x1E921, None, "ADLAM CAPITAL LETTER SHA", 0x31, "Adlam"),
    c(0x1E922, None, "ADLAM SMALL LETTER ALIF", 0x31, "Adlam"),
    c(0x1E923, None, "ADLAM SMALL LETTER DAALI", 0x31, "Adlam"),
    c(0x1E924, None, "ADLAM SMALL LETTER LAAM", 0x31, "Adlam"),
    c(0x1E925, None, "ADLAM SMALL LETTER MIIM", 0x31, "Adlam"),
    c(0x1E926, None, "ADLAM SMALL LETTER BA", 0x31, "Adlam"),
    c(0x1E927, None, "ADLAM SMALL LETTER SINNYIIYHE", 0x31, "Adlam"),
    c(0x1E928, None, "ADLAM SMALL LETTER PE", 0x31, "Adlam"),
    c(0x1E929, None, "ADLAM SMALL LETTER BHE", 0x31, "Adlam"),
    c(0x1E92A, None, "ADLAM SMALL LETTER RA", 0x31, "Adlam"),
    c(0x1E92B, None, "ADLAM SMALL LETTER E", 0x31, "Adlam"),
    c(0x1E92C, None, "ADLAM SMALL LETTER FA", 0x31, "Adlam"),
    c(0x1E92D, None, "ADLAM SMALL LETTER I", 0x31, "Adlam"),
    c(0x1E92E, None, "ADLAM SMALL LETTER O", 0x31, "Adlam"),
    c(0x1E92F, None, "ADLAM SMALL LETTER DHA", 0x31, "Adlam"),
    c(0x1E930, None, "ADLAM SMALL LETTER YHE", 0x31, "Adlam"),
    c(0x1E931, None, "ADLAM SMALL LETTER WAW", 0x31, "Adlam"),
    c(0x1E932, None, "ADLAM SMALL LETTER NUN", 0x31, "Adlam"),
    c(0x1E933, None, "ADLAM SMALL LETTER KAF", 0x31, "Adlam"),
    c(0x1E934, None, "ADLAM SMALL LETTER YA", 0x31, "Adlam"),
    c(0x1E935, None, "ADLAM SMALL LETTER U", 0x31, "Adlam"),
    c(0x1E936, None, "ADLAM SMALL LETTER JIIM", 0x31, "Adlam"),
    c(0x1E937, None, "ADLAM SMALL LETTER CHI", 0x31, "Adlam"),
    c(0x1E938, None, "ADLAM SMALL LETTER HA", 0x31, "Adlam"),
    c(0x1E939, None, "ADLAM SMALL LETTER QAAF", 0x31, "Adlam"),
    c(0x1E93A, None, "ADLAM SMALL LETTER GA", 0x31, "Adlam"),
    c(0x1E93B, None, "ADLAM SMALL LETTER NYA", 0x31, "Adlam"),
    c(0x1E93C, None, "ADLAM SMALL LETTER TU", 0x31, "Adlam"),
    c(0x1E93D, None, "ADLAM SMALL LETTER NHA", 0x31, "Adlam"),
    c(0x1E93E, None, "ADLAM SMALL LETTER VA", 0x31, "Adlam"),
    c(0x1E93F, None, "ADLAM SMALL LETTER KHA", 0x31, "Adlam"),
    c(0x1E940, None, "ADLAM SMALL LETTER GBE", 0x31, "Adlam"),
    c(0x1E941, None, "ADLAM SMALL LETTER ZAL", 0x31, "Adlam"),
    c(0x1E942, None, "ADLAM SMALL LETTER KPO", 0x31, "Adlam"),
    c(0x1E943, None, "ADLAM SMALL LETTER SHA", 0x31, "Adlam"),
    c(0x1E944, None, "ADLAM ALIF LENGTHENER", 0x20, "Adlam"),
    c(0x1E945, None, "ADLAM VOWEL LENGTHENER", 0x20, "Adlam"),
    c(0x1E946, None, "ADLAM GEMINATION MARK", 0x20, "Adlam"),
    c(0x1E947, None, "ADLAM HAMZA", 0x21, "Adlam"),
    c(0x1E948, None, "ADLAM CONSONANT MODIFIER", 0x20, "Adlam"),
    c(0x1E949, None, "ADLAM GEMINATE CONSONANT MODIFIER", 0x20, "Adlam"),
    c(0x1E94A, None, "ADLAM NUKTA", 0x20, "Adlam"),
    c(0x1E94B, None, "ADLAM NASALIZATION MARK", 0x31, "Adlam"),
    c(0x1E950, None, "ADLAM DIGIT ZERO", 0x20, "Adlam"),
    c(0x1E951, None, "ADLAM DIGIT ONE", 0x20, "Adlam"),
    c(0x1E952, None, "ADLAM DIGIT TWO", 0x20, "Adlam"),
    c(0x1E953, None, "ADLAM DIGIT THREE", 0x20, "Adlam"),
    c(0x1E954, None, "ADLAM DIGIT FOUR", 0x20, "Adlam"),
    c(0x1E955, None, "ADLAM DIGIT FIVE", 0x20, "Adlam"),
    c(0x1E956, None, "ADLAM DIGIT SIX", 0x20, "Adlam"),
    c(0x1E957, None, "ADLAM DIGIT SEVEN", 0x20, "Adlam"),
    c(0x1E958, None, "ADLAM DIGIT EIGHT", 0x20, "Adlam"),
    c(0x1E959, None, "ADLAM DIGIT NINE", 0x20, "Adlam"),
    c(0x1E95E, None, "ADLAM INITIAL EXCLAMATION MARK", 0x00, "Adlam"),
    c(0x1E95F, None, "ADLAM INITIAL QUESTION MARK", 0x00, "Adlam"),
    c(0x1EC71, None, "INDIC SIYAQ NUMBER ONE", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC72, None, "INDIC SIYAQ NUMBER TWO", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC73, None, "INDIC SIYAQ NUMBER THREE", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC74, None, "INDIC SIYAQ NUMBER FOUR", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC75, None, "INDIC SIYAQ NUMBER FIVE", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC76, None, "INDIC SIYAQ NUMBER SIX", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC77, None, "INDIC SIYAQ NUMBER SEVEN", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC78, None, "INDIC SIYAQ NUMBER EIGHT", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC79, None, "INDIC SIYAQ NUMBER NINE", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC7A, None, "INDIC SIYAQ NUMBER TEN", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC7B, None, "INDIC SIYAQ NUMBER TWENTY", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC7C, None, "INDIC SIYAQ NUMBER THIRTY", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC7D, None, "INDIC SIYAQ NUMBER FORTY", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC7E, None, "INDIC SIYAQ NUMBER FIFTY", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC7F, None, "INDIC SIYAQ NUMBER SIXTY", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC80, None, "INDIC SIYAQ NUMBER SEVENTY", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC81, None, "INDIC SIYAQ NUMBER EIGHTY", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC82, None, "INDIC SIYAQ NUMBER NINETY", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC83, None, "INDIC SIYAQ NUMBER ONE HUNDRED", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC84, None, "INDIC SIYAQ NUMBER TWO HUNDRED", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC85, None, "INDIC SIYAQ NUMBER THREE HUNDRED", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC86, None, "INDIC SIYAQ NUMBER FOUR HUNDRED", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC87, None, "INDIC SIYAQ NUMBER FIVE HUNDRED", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC88, None, "INDIC SIYAQ NUMBER SIX HUNDRED", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC89, None, "INDIC SIYAQ NUMBER SEVEN HUNDRED", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC8A, None, "INDIC SIYAQ NUMBER EIGHT HUNDRED", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC8B, None, "INDIC SIYAQ NUMBER NINE HUNDRED", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC8C, None, "INDIC SIYAQ NUMBER ONE THOUSAND", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC8D, None, "INDIC SIYAQ NUMBER TWO THOUSAND", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC8E, None, "INDIC SIYAQ NUMBER THREE THOUSAND", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC8F, None, "INDIC SIYAQ NUMBER FOUR THOUSAND", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC90, None, "INDIC SIYAQ NUMBER FIVE THOUSAND", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC91, None, "INDIC SIYAQ NUMBER SIX THOUSAND", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC92, None, "INDIC SIYAQ NUMBER SEVEN THOUSAND", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC93, None, "INDIC SIYAQ NUMBER EIGHT THOUSAND", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC94, None, "INDIC SIYAQ NUMBER NINE THOUSAND", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC95, None, "INDIC SIYAQ NUMBER TEN THOUSAND", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC96, None, "INDIC SIYAQ NUMBER TWENTY THOUSAND", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC97, None, "INDIC SIYAQ NUMBER THIRTY THOUSAND", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC98, None, "INDIC SIYAQ NUMBER FORTY THOUSAND", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC99, None, "INDIC SIYAQ NUMBER FIFTY THOUSAND", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC9A, None, "INDIC SIYAQ NUMBER SIXTY THOUSAND", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC9B, None, "INDIC SIYAQ NUMBER SEVENTY THOUSAND", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC9C, None, "INDIC SIYAQ NUMBER EIGHTY THOUSAND", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC9D, None, "INDIC SIYAQ NUMBER NINETY THOUSAND", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC9E, None, "INDIC SIYAQ NUMBER LAKH", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1EC9F, None, "INDIC SIYAQ NUMBER LAKHAN", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECA0, None, "INDIC SIYAQ LAKH MARK", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECA1, None, "INDIC SIYAQ NUMBER KAROR", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECA2, None, "INDIC SIYAQ NUMBER KARORAN", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECA3, None, "INDIC SIYAQ NUMBER PREFIXED ONE", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECA4, None, "INDIC SIYAQ NUMBER PREFIXED TWO", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECA5, None, "INDIC SIYAQ NUMBER PREFIXED THREE", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECA6, None, "INDIC SIYAQ NUMBER PREFIXED FOUR", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECA7, None, "INDIC SIYAQ NUMBER PREFIXED FIVE", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECA8, None, "INDIC SIYAQ NUMBER PREFIXED SIX", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECA9, None, "INDIC SIYAQ NUMBER PREFIXED SEVEN", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECAA, None, "INDIC SIYAQ NUMBER PREFIXED EIGHT", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECAB, None, "INDIC SIYAQ NUMBER PREFIXED NINE", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECAC, None, "INDIC SIYAQ PLACEHOLDER", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECAD, None, "INDIC SIYAQ FRACTION ONE QUARTER", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECAE, None, "INDIC SIYAQ FRACTION ONE HALF", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECAF, None, "INDIC SIYAQ FRACTION THREE QUARTERS", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECB0, None, "INDIC SIYAQ RUPEE MARK", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECB1, None, "INDIC SIYAQ NUMBER ALTERNATE ONE", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECB2, None, "INDIC SIYAQ NUMBER ALTERNATE TWO", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECB3, None, "INDIC SIYAQ NUMBER ALTERNATE TEN THOUSAND", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ECB4, None, "INDIC SIYAQ ALTERNATE LAKH MARK", 0x00, "Indic_Siyaq_Numbers"),
    c(0x1ED01, None, "OTTOMAN SIYAQ NUMBER ONE", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED02, None, "OTTOMAN SIYAQ NUMBER TWO", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED03, None, "OTTOMAN SIYAQ NUMBER THREE", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED04, None, "OTTOMAN SIYAQ NUMBER FOUR", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED05, None, "OTTOMAN SIYAQ NUMBER FIVE", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED06, None, "OTTOMAN SIYAQ NUMBER SIX", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED07, None, "OTTOMAN SIYAQ NUMBER SEVEN", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED08, None, "OTTOMAN SIYAQ NUMBER EIGHT", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED09, None, "OTTOMAN SIYAQ NUMBER NINE", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED0A, None, "OTTOMAN SIYAQ NUMBER TEN", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED0B, None, "OTTOMAN SIYAQ NUMBER TWENTY", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED0C, None, "OTTOMAN SIYAQ NUMBER THIRTY", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED0D, None, "OTTOMAN SIYAQ NUMBER FORTY", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED0E, None, "OTTOMAN SIYAQ NUMBER FIFTY", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED0F, None, "OTTOMAN SIYAQ NUMBER SIXTY", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED10, None, "OTTOMAN SIYAQ NUMBER SEVENTY", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED11, None, "OTTOMAN SIYAQ NUMBER EIGHTY", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED12, None, "OTTOMAN SIYAQ NUMBER NINETY", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED13, None, "OTTOMAN SIYAQ NUMBER ONE HUNDRED", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED14, None, "OTTOMAN SIYAQ NUMBER TWO HUNDRED", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED15, None, "OTTOMAN SIYAQ NUMBER THREE HUNDRED", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED16, None, "OTTOMAN SIYAQ NUMBER FOUR HUNDRED", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED17, None, "OTTOMAN SIYAQ NUMBER FIVE HUNDRED", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED18, None, "OTTOMAN SIYAQ NUMBER SIX HUNDRED", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED19, None, "OTTOMAN SIYAQ NUMBER SEVEN HUNDRED", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED1A, None, "OTTOMAN SIYAQ NUMBER EIGHT HUNDRED", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED1B, None, "OTTOMAN SIYAQ NUMBER NINE HUNDRED", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED1C, None, "OTTOMAN SIYAQ NUMBER ONE THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED1D, None, "OTTOMAN SIYAQ NUMBER TWO THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED1E, None, "OTTOMAN SIYAQ NUMBER THREE THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED1F, None, "OTTOMAN SIYAQ NUMBER FOUR THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED20, None, "OTTOMAN SIYAQ NUMBER FIVE THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED21, None, "OTTOMAN SIYAQ NUMBER SIX THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED22, None, "OTTOMAN SIYAQ NUMBER SEVEN THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED23, None, "OTTOMAN SIYAQ NUMBER EIGHT THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED24, None, "OTTOMAN SIYAQ NUMBER NINE THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED25, None, "OTTOMAN SIYAQ NUMBER TEN THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED26, None, "OTTOMAN SIYAQ NUMBER TWENTY THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED27, None, "OTTOMAN SIYAQ NUMBER THIRTY THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED28, None, "OTTOMAN SIYAQ NUMBER FORTY THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED29, None, "OTTOMAN SIYAQ NUMBER FIFTY THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED2A, None, "OTTOMAN SIYAQ NUMBER SIXTY THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED2B, None, "OTTOMAN SIYAQ NUMBER SEVENTY THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED2C, None, "OTTOMAN SIYAQ NUMBER EIGHTY THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED2D, None, "OTTOMAN SIYAQ NUMBER NINETY THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED2E, None, "OTTOMAN SIYAQ MARRATAN", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED2F, None, "OTTOMAN SIYAQ ALTERNATE NUMBER TWO", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED30, None, "OTTOMAN SIYAQ ALTERNATE NUMBER THREE", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED31, None, "OTTOMAN SIYAQ ALTERNATE NUMBER FOUR", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED32, None, "OTTOMAN SIYAQ ALTERNATE NUMBER FIVE", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED33, None, "OTTOMAN SIYAQ ALTERNATE NUMBER SIX", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED34, None, "OTTOMAN SIYAQ ALTERNATE NUMBER SEVEN", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED35, None, "OTTOMAN SIYAQ ALTERNATE NUMBER EIGHT", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED36, None, "OTTOMAN SIYAQ ALTERNATE NUMBER NINE", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED37, None, "OTTOMAN SIYAQ ALTERNATE NUMBER TEN", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED38, None, "OTTOMAN SIYAQ ALTERNATE NUMBER FOUR HUNDRED", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED39, None, "OTTOMAN SIYAQ ALTERNATE NUMBER SIX HUNDRED", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED3A, None, "OTTOMAN SIYAQ ALTERNATE NUMBER TWO THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED3B, None, "OTTOMAN SIYAQ ALTERNATE NUMBER TEN THOUSAND", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED3C, None, "OTTOMAN SIYAQ FRACTION ONE HALF", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1ED3D, None, "OTTOMAN SIYAQ FRACTION ONE SIXTH", 0x00, "Ottoman_Siyaq_Numbers"),
    c(0x1EE00, None, "ARABIC MATHEMATICAL ALEF", 0x33, "Arabic_Math"),
    c(0x1EE01, None, "ARABIC MATHEMATICAL BEH", 0x33, "Arabic_Math"),
    c(0x1EE02, None, "ARABIC MATHEMATICAL JEEM", 0x33, "Arabic_Math"),
    c(0x1EE03, None, "ARABIC MATHEMATICAL DAL", 0x33, "Arabic_Math"),
    c(0x1EE05, None, "ARABIC MATHEMATICAL WAW", 0x33, "Arabic_Math"),
    c(0x1EE06, None, "ARABIC MATHEMATICAL ZAIN", 0x33, "Arabic_Math"),
    c(0x1EE07, None, "ARABIC MATHEMATICAL HAH", 0x33, "Arabic_Math"),
    c(0x1EE08, None, "ARABIC MATHEMATICAL TAH", 0x33, "Arabic_Math"),
    c(0x1EE09, None, "ARABIC MATHEMATICAL YEH", 0x33, "Arabic_Math"),
    c(0x1EE0A, None, "ARABIC MATHEMATICAL KAF", 0x33, "Arabic_Math"),
    c(0x1EE0B, None, "ARABIC MATHEMATICAL LAM", 0x33, "Arabic_Math"),
    c(0x1EE0C, None, "ARABIC MATHEMATICAL MEEM", 0x33, "Arabic_Math"),
    c(0x1EE0D, None, "ARABIC MATHEMATICAL NOON", 0x33, "Arabic_Math"),
    c(0x1EE0E, None, "ARABIC MATHEMATICAL SEEN", 0x33, "Arabic_Math"),
    c(0x1EE0F, None, "ARABIC MATHEMATICAL AIN", 0x33, "Arabic_Math"),
    c(0x1EE10, None, "ARABIC MATHEMATICAL FEH", 0x33, "Arabic_Math"),
    c(0x1EE11, None, "ARABIC MATHEMATICAL SAD", 0x33, "Arabic_Math"),
    c(0x1EE12, None, "ARABIC MATHEMATICAL QAF", 0x33, "Arabic_Math"),
    c(0x1EE13, None, "ARABIC MATHEMATICAL REH", 0x33, "Arabic_Math"),
    c(0x1EE14, None, "ARABIC MATHEMATICAL SHEEN", 0x33, "Arabic_Math"),
    c(0x1EE15, None, "ARABIC MATHEMATICAL TEH", 0x33, "Arabic_Math"),
    c(0x1EE16, None, "ARABIC MATHEMATICAL THEH", 0x33, "Arabic_Math"),
    c(0x1EE17, None, "ARABIC MATHEMATICAL KHAH", 0x33, "Arabic_Math"),
    c(0x1EE18, None, "ARABIC MATHEMATICAL THAL", 0x33, "Arabic_Math"),
    c(0x1EE19, None, "ARABIC MATHEMATICAL DAD", 0x33, "Arabic_Math"),
    c(0x1EE1A, None, "ARABIC MATHEMATICAL ZAH", 0x33, "Arabic_Math"),
    c(0x1EE1B, None, "ARABIC MATHEMATICAL GHAIN", 0x33, "Arabic_Math"),
    c(0x1EE1C, None, "ARABIC MATHEMATICAL DOTLESS BEH", 0x33, "Arabic_Math"),
    c(0x1EE1D, None, "ARABIC MATHEMATICAL DOTLESS NOON", 0x33, "Arabic_Math"),
    c(0x1EE1E, None, "ARABIC MATHEMATICAL DOTLESS FEH", 0x33, "Arabic_Math"),
    c(0x1EE1F, None, "ARABIC MATHEMATICAL DOTLESS QAF", 0x33, "Arabic_Math"),
    c(0x1EE21, None, "ARABIC MATHEMATICAL INITIAL BEH", 0x33, "Arabic_Math"),
    c(0x1EE22, None, "ARABIC MATHEMATICAL INITIAL JEEM", 0x33, "Arabic_Math"),
    c(0x1EE24, None, "ARABIC MATHEMATICAL INITIAL HEH", 0x33, "Arabic_Math"),
    c(0x1EE27, None, "ARABIC MATHEMATICAL INITIAL HAH", 0x33, "Arabic_Math"),
    c(0x1EE29, None, "ARABIC MATHEMATICAL INITIAL YEH", 0x33, "Arabic_Math"),
    c(0x1EE2A, None, "ARABIC MATHEMATICAL INITIAL KAF", 0x33, "Arabic_Math"),
    c(0x1EE2B, None, "ARABIC MATHEMATICAL INITIAL LAM", 0x33, "Arabic_Math"),
    c(0x1EE2C, None, "ARABIC MATHEMATICAL INITIAL MEEM", 0x33, "Arabic_Math"),
    c(0x1EE2D, None, "ARABIC MATHEMATICAL INITIAL NOON", 0x33, "Arabic_Math"),
    c(0x1EE2E, None, "ARABIC MATHEMATICAL INITIAL SEEN", 0x33, "Arabic_Math"),
    c(0x1EE2F, None, "ARABIC MATHEMATICAL INITIAL AIN", 0x33, "Arabic_Math"),
    c(0x1EE30, None, "ARABIC MATHEMATICAL INITIAL FEH", 0x33, "Arabic_Math"),
    c(0x1EE31, None, "ARABIC MATHEMATICAL INITIAL SAD", 0x33, "Arabic_Math"),
    c(0x1EE32, None, "ARABIC MATHEMATICAL INITIAL QAF", 0x33, "Arabic_Math"),
    c(0x1EE34, None, "ARABIC MATHEMATICAL INITIAL SHEEN", 0x33, "Arabic_Math"),
    c(0x1EE35, None, "ARABIC MATHEMATICAL INITIAL TEH", 0x33, "Arabic_Math"),
    c(0x1EE36, None, "ARABIC MATHEMATICAL INITIAL THEH", 0x33, "Arabic_Math"),
    c(0x1EE37, None, "ARABIC MATHEMATICAL INITIAL KHAH", 0x33, "Arabic_Math"),
    c(0x1EE39, None, "ARABIC MATHEMATICAL INITIAL DAD", 0x33, "Arabic_Math"),
    c(0x1EE3B, None, "ARABIC MATHEMATICAL INITIAL GHAIN", 0x33, "Arabic_Math"),
    c(0x1EE42, None, "ARABIC MATHEMATICAL TAILED JEEM", 0x33, "Arabic_Math"),
    c(0x1EE47, None, "ARABIC MATHEMATICAL TAILED HAH", 0x33, "Arabic_Math"),
    c(0x1EE49, None, "ARABIC MATHEMATICAL TAILED YEH", 0x33, "Arabic_Math"),
    c(0x1EE4B, None, "ARABIC MATHEMATICAL TAILED LAM", 0x33, "Arabic_Math"),
    c(0x1EE4D, None, "ARABIC MATHEMATICAL TAILED NOON", 0x33, "Arabic_Math"),
    c(0x1EE4E, None, "ARABIC MATHEMATICAL TAILED SEEN", 0x33, "Arabic_Math"),
    c(0x1EE4F, None, "ARABIC MATHEMATICAL TAILED AIN", 0x33, "Arabic_Math"),
    c(0x1EE51, None, "ARABIC MATHEMATICAL TAILED SAD", 0x33, "Arabic_Math"),
    c(0x1EE52, None, "ARABIC MATHEMATICAL TAILED QAF", 0x33, "Arabic_Math"),
    c(0x1EE54, None, "ARABIC MATHEMATICAL TAILED SHEEN", 0x33, "Arabic_Math"),
    c(0x1EE57, None, "ARABIC MATHEMATICAL TAILED KHAH", 0x33, "Arabic_Math"),
    c(0x1EE59, None, "ARABIC MATHEMATICAL TAILED DAD", 0x33, "Arabic_Math"),
    c(0x1EE5B, None, "ARABIC MATHEMATICAL TAILED GHAIN", 0x33, "Arabic_Math"),
    c(0x1EE5D, None, "ARABIC MATHEMATICAL TAILED DOTLESS NOON", 0x33, "Arabic_Math"),
    c(0x1EE5F, None, "ARABIC MATHEMATICAL TAILED DOTLESS QAF", 0x33, "Arabic_Math"),
    c(0x1EE61, None, "ARABIC MATHEMATICAL STRETCHED BEH", 0x33, "Arabic_Math"),
    c(0x1EE62, None, "ARABIC MATHEMATICAL STRETCHED JEEM", 0x33, "Arabic_Math"),
    c(0x1EE64, None, "ARABIC MATHEMATICAL STRETCHED HEH", 0x33, "Arabic_Math"),
    c(0x1EE67, None, "ARABIC MATHEMATICAL STRETCHED HAH", 0x33, "Arabic_Math"),
    c(0x1EE68, None, "ARABIC MATHEMATICAL STRETCHED TAH", 0x33, "Arabic_Math"),
    c(0x1EE69, None, "ARABIC MATHEMATICAL STRETCHED YEH", 0x33, "Arabic_Math"),
    c(0x1EE6A, None, "ARABIC MATHEMATICAL STRETCHED KAF", 0x33, "Arabic_Math"),
    c(0x1EE6C, None, "ARABIC MATHEMATICAL STRETCHED MEEM", 0x33, "Arabic_Math"),
    c(0x1EE6D, None, "ARABIC MATHEMATICAL STRETCHED NOON", 0x33, "Arabic_Math"),
    c(0x1EE6E, None, "ARABIC MATHEMATICAL STRETCHED SEEN", 0x33, "Arabic_Math"),
    c(0x1EE6F, None, "ARABIC MATHEMATICAL STRETCHED AIN", 0x33, "Arabic_Math"),
    c(0x1EE70, None, "ARABIC MATHEMATICAL STRETCHED FEH", 0x33, "Arabic_Math"),
    c(0x1EE71, None, "ARABIC MATHEMATICAL STRETCHED SAD", 0x33, "Arabic_Math"),
    c(0x1EE72, None, "ARABIC MATHEMATICAL STRETCHED QAF", 0x33, "Arabic_Math"),
    c(0x1EE74, None, "ARABIC MATHEMATICAL STRETCHED SHEEN", 0x33, "Arabic_Math"),
    c(0x1EE75, None, "ARABIC MATHEMATICAL STRETCHED TEH", 0x33, "Arabic_Math"),
    c(0x1EE76, None, "ARABIC MATHEMATICAL STRETCHED THEH", 0x33, "Arabic_Math"),
    c(0x1EE77, None, "ARABIC MATHEMATICAL STRETCHED KHAH", 0x33, "Arabic_Math"),
    c(0x1EE79, None, "ARABIC MATHEMATICAL STRETCHED DAD", 0x33, "Arabic_Math"),
    c(0x1EE7A, None, "ARABIC MATHEMATICAL STRETCHED ZAH", 0x33, "Arabic_Math"),
    c(0x1EE7B, None, "ARABIC MATHEMATICAL STRETCHED GHAIN", 0x33, "Arabic_Math"),
    c(0x1EE7C, None, "ARABIC MATHEMATICAL STRETCHED DOTLESS BEH", 0x33, "Arabic_Math"),
    c(0x1EE7E, None, "ARABIC MATHEMATICAL STRETCHED DOTLESS FEH", 0x33, "Arabic_Math"),
    c(0x1EE80, None, "ARABIC MATHEMATICAL LOOPED ALEF", 0x33, "Arabic_Math"),
    c(0x1EE81, None, "ARABIC MATHEMATICAL LOOPED BEH", 0x33, "Arabic_Math"),
    c(0x1EE82, None, "ARABIC MATHEMATICAL LOOPED JEEM", 0x33, "Arabic_Math"),
    c(0x1EE83, None, "ARABIC MATHEMATICAL LOOPED DAL", 0x33, "Arabic_Math"),
    c(0x1EE84, None, "ARABIC MATHEMATICAL LOOPED HEH", 0x33, "Arabic_Math"),
    c(0x1EE85, None, "ARABIC MATHEMATICAL LOOPED WAW", 0x33, "Arabic_Math"),
    c(0x1EE86, None, "ARABIC MATHEMATICAL LOOPED ZAIN", 0x33, "Arabic_Math"),
    c(0x1EE87, None, "ARABIC MATHEMATICAL LOOPED HAH", 0x33, "Arabic_Math"),
    c(0x1EE88, None, "ARABIC MATHEMATICAL LOOPED TAH", 0x33, "Arabic_Math"),
    c(0x1EE89, None, "ARABIC MATHEMATICAL LOOPED YEH", 0x33, "Arabic_Math"),
    c(0x1EE8B, None, "ARABIC MATHEMATICAL LOOPED LAM", 0x33, "Arabic_Math"),
    c(0x1EE8C, None, "ARABIC MATHEMATICAL LOOPED MEEM", 0x33, "Arabic_Math"),
    c(0x1EE8D, None, "ARABIC MATHEMATICAL LOOPED NOON", 0x33, "Arabic_Math"),
    c(0x1EE8E, None, "ARABIC MATHEMATICAL LOOPED SEEN", 0x33, "Arabic_Math"),
    c(0x1EE8F, None, "ARABIC MATHEMATICAL LOOPED AIN", 0x33, "Arabic_Math"),
    c(0x1EE90, None, "ARABIC MATHEMATICAL LOOPED FEH", 0x33, "Arabic_Math"),
    c(0x1EE91, None, "ARABIC MATHEMATICAL LOOPED SAD", 0x33, "Arabic_Math"),
    c(0x1EE92, None, "ARABIC MATHEMATICAL LOOPED QAF", 0x33, "Arabic_Math"),
    c(0x1EE93, None, "ARABIC MATHEMATICAL LOOPED REH", 0x33, "Arabic_Math"),
    c(0x1EE94, None, "ARABIC MATHEMATICAL LOOPED SHEEN", 0x33, "Arabic_Math"),
    c(0x1EE95, None, "ARABIC MATHEMATICAL LOOPED TEH", 0x33, "Arabic_Math"),
    c(0x1EE96, None, "ARABIC MATHEMATICAL LOOPED THEH", 0x33, "Arabic_Math"),
    c(0x1EE97, None, "ARABIC MATHEMATICAL LOOPED KHAH", 0x33, "Arabic_Math"),
    c(0x1EE98, None, "ARABIC MATHEMATICAL LOOPED THAL", 0x33, "Arabic_Math"),
    c(0x1EE99, None, "ARABIC MATHEMATICAL LOOPED DAD", 0x33, "Arabic_Math"),
    c(0x1EE9A, None, "ARABIC MATHEMATICAL LOOPED ZAH", 0x33, "Arabic_Math"),
    c(0x1EE9B, None, "ARABIC MATHEMATICAL LOOPED GHAIN", 0x33, "Arabic_Math"),
    c(0x1EEA1, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK BEH", 0x33, "Arabic_Math"),
    c(0x1EEA2, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK JEEM", 0x33, "Arabic_Math"),
    c(0x1EEA3, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK DAL", 0x33, "Arabic_Math"),
    c(0x1EEA5, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK WAW", 0x33, "Arabic_Math"),
    c(0x1EEA6, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK ZAIN", 0x33, "Arabic_Math"),
    c(0x1EEA7, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK HAH", 0x33, "Arabic_Math"),
    c(0x1EEA8, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK TAH", 0x33, "Arabic_Math"),
    c(0x1EEA9, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK YEH", 0x33, "Arabic_Math"),
    c(0x1EEAB, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK LAM", 0x33, "Arabic_Math"),
    c(0x1EEAC, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK MEEM", 0x33, "Arabic_Math"),
    c(0x1EEAD, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK NOON", 0x33, "Arabic_Math"),
    c(0x1EEAE, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK SEEN", 0x33, "Arabic_Math"),
    c(0x1EEAF, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK AIN", 0x33, "Arabic_Math"),
    c(0x1EEB0, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK FEH", 0x33, "Arabic_Math"),
    c(0x1EEB1, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK SAD", 0x33, "Arabic_Math"),
    c(0x1EEB2, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK QAF", 0x33, "Arabic_Math"),
    c(0x1EEB3, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK REH", 0x33, "Arabic_Math"),
    c(0x1EEB4, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK SHEEN", 0x33, "Arabic_Math"),
    c(0x1EEB5, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK TEH", 0x33, "Arabic_Math"),
    c(0x1EEB6, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK THEH", 0x33, "Arabic_Math"),
    c(0x1EEB7, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK KHAH", 0x33, "Arabic_Math"),
    c(0x1EEB8, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK THAL", 0x33, "Arabic_Math"),
    c(0x1EEB9, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK DAD", 0x33, "Arabic_Math"),
    c(0x1EEBA, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK ZAH", 0x33, "Arabic_Math"),
    c(0x1EEBB, None, "ARABIC MATHEMATICAL DOUBLE-STRUCK GHAIN", 0x33, "Arabic_Math"),
    c(0x1EEF0, None, "ARABIC MATHEMATICAL OPERATOR MEEM WITH HAH WITH TATWEEL", 0x02, "Arabic_Math"),
    c(0x1EEF1, None, "ARABIC MATHEMATICAL OPERATOR HAH WITH DAL", 0x02, "Arabic_Math"),
    c(0x1F000, None, "MAHJONG TILE EAST WIND", 0x00, "Mahjong"),
    c(0x1F001, None, "MAHJONG TILE SOUTH WIND", 0x00, "Mahjong"),
    c(0x1F002, None, "MAHJONG TILE WEST WIND", 0x00, "Mahjong"),
    c(0x1F003, None, "MAHJONG TILE NORTH WIND", 0x00, "Mahjong"),
    c(0x1F004, None, "MAHJONG TILE RED DRAGON", 0x00, "Mahjong"),
    c(0x1F005, None, "MAHJONG TILE GREEN DRAGON", 0x00, "Mahjong"),
    c(0x1F006, None, "MAHJONG TILE WHITE DRAGON", 0x00, "Mahjong"),
    c(0x1F007, None, "MAHJONG TILE ONE OF CHARACTERS", 0x00, "Mahjong"),
    c(0x1F008, None, "MAHJONG TILE TWO OF CHARACTERS", 0x00, "Mahjong"),
    c(0x1F009, None, "MAHJONG TILE THREE OF CHARACTERS", 0x00, "Mahjong"),
    c(0x1F00A, None, "MAHJONG TILE FOUR OF CHARACTERS", 0x00, "Mahjong"),
    c(0x1F00B, None, "MAHJONG TILE FIVE OF CHARACTERS", 0x00, "Mahjong"),
    c(0x1F00C, None, "MAHJONG TILE SIX OF CHARACTERS", 0x00, "Mahjong"),
    c(0x1F00D, None, "MAHJONG TILE SEVEN OF CHARACTERS", 0x00, "Mahjong"),
    c(0x1F00E, None, "MAHJONG TILE EIGHT OF CHARACTERS", 0x00, "Mahjong"),
    c(0x1F00F, None, "MAHJONG TILE NINE OF CHARACTERS", 0x00, "Mahjong"),
    c(0x1F010, None, "MAHJONG TILE ONE OF BAMBOOS", 0x00, "Mahjong"),
    c(0x1F011, None, "MAHJONG TILE TWO OF BAMBOOS", 0x00, "Mahjong"),
    c(0x1F012, None, "MAHJONG TILE THREE OF BAMBOOS", 0x00, "Mahjong"),
    c(0x1F013, None, "MAHJONG TILE FOUR OF BAMBOOS", 0x00, "Mahjong"),
    c(0x1F014, None, "MAHJONG TILE FIVE OF BAMBOOS", 0x00, "Mahjong"),
    c(0x1F015, None, "MAHJONG TILE SIX OF BAMBOOS", 0x00, "Mahjong"),
    c(0x1F016, None, "MAHJONG TILE SEVEN OF BAMBOOS", 0x00, "Mahjong"),
    c(0x1F017, None, "MAHJONG TILE EIGHT OF BAMBOOS", 0x00, "Mahjong"),
    c(0x1F018, None, "MAHJONG TILE NINE OF BAMBOOS", 0x00, "Mahjong"),
    c(0x1F019, None, "MAHJONG TILE ONE OF CIRCLES", 0x00, "Mahjong"),
    c(0x1F01A, None, "MAHJONG TILE TWO OF CIRCLES", 0x00, "Mahjong"),
    c(0x1F01B, None, "MAHJONG TILE THREE OF CIRCLES", 0x00, "Mahjong"),
    c(0x1F01C, None, "MAHJONG TILE FOUR OF CIRCLES", 0x00, "Mahjong"),
    c(0x1F01D, None, "MAHJONG TILE FIVE OF CIRCLES", 0x00, "Mahjong"),
    c(0x1F01E, None, "MAHJONG TILE SIX OF CIRCLES", 0x00, "Mahjong"),
    c(0x1F01F, None, "MAHJONG TILE SEVEN OF CIRCLES", 0x00, "Mahjong"),
    c(0x1F020, None, "MAHJONG TILE EIGHT OF CIRCLES", 0x00, "Mahjong"),
    c(0x1F021, None, "MAHJONG TILE NINE OF CIRCLES", 0x00, "Mahjong"),
    c(0x1F022, None, "MAHJONG TILE PLUM", 0x00, "Mahjong"),
    c(0x1F023, None, "MAHJONG TILE ORCHID", 0x00, "Mahjong"),
    c(0x1F024, None, "MAHJONG TILE BAMBOO", 0x00, "Mahjong"),
    c(0x1F025, None, "MAHJONG TILE CHRYSANTHEMUM", 0x00, "Mahjong"),
    c(0x1F026, None, "MAHJONG TILE SPRING", 0x00, "Mahjong"),
    c(0x1F027, None, "MAHJONG TILE SUMMER", 0x00, "Mahjong"),
    c(0x1F028, None, "MAHJONG TILE AUTUMN", 0x00, "Mahjong"),
    c(0x1F029, None, "MAHJONG TILE WINTER", 0x00, "Mahjong"),
    c(0x1F02A, None, "MAHJONG TILE JOKER", 0x00, "Mahjong"),
    c(0x1F02B, None, "MAHJONG TILE BACK", 0x00, "Mahjong"),
    c(0x1F030, None, "DOMINO TILE HORIZONTAL BACK", 0x00, "Domino"),
    c(0x1F031, None, "DOMINO TILE HORIZONTAL-00-00", 0x00, "Domino"),
    c(0x1F032, None, "DOMINO TILE HORIZONTAL-00-01", 0x00, "Domino"),
    c(0x1F033, None, "DOMINO TILE HORIZONTAL-00-02", 0x00, "Domino"),
    c(0x1F034, None, "DOMINO TILE HORIZONTAL-00-03", 0x00, "Domino"),
    c(0x1F035, None, "DOMINO TILE HORIZONTAL-00-04", 0x00, "Domino"),
    c(0x1F036, None, "DOMINO TILE HORIZONTAL-00-05", 0x00, "Domino"),
    c(0x1F037, None, "DOMINO TILE HORIZONTAL-00-06", 0x00, "Domino"),
    c(0x1F038, None, "DOMINO TILE HORIZONTAL-01-00", 0x00, "Domino"),
    c(0x1F039, None, "DOMINO TILE HORIZONTAL-01-01", 0x00, "Domino"),
    c(0x1F03A, None, "DOMINO TILE HORIZONTAL-01-02", 0x00, "Domino"),
    c(0x1F03B, None, "DOMINO TILE HORIZONTAL-01-03", 0x00, "Domino"),
    c(0x1F03C, None, "DOMINO TILE HORIZONTAL-01-04", 0x00, "Domino"),
    c(0x1F03D, None, "DOMINO TILE HORIZONTAL-01-05", 0x00, "Domino"),
    c(0x1F03E, None, "DOMINO TILE HORIZONTAL-01-06", 0x00, "Domino"),
    c(0x1F03F, None, "DOMINO TILE HORIZONTAL-02-00", 0x00, "Domino"),
    c(0x1F040, None, "DOMINO TILE HORIZONTAL-02-01", 0x00, "Domino"),
    c(0x1F041, None, "DOMINO TILE HORIZONTAL-02-02", 0x00, "Domino"),
    c(0x1F042, None, "DOMINO TILE HORIZONTAL-02-03", 0x00, "Domino"),
    c(0x1F043, None, "DOMINO TILE HORIZONTAL-02-04", 0x00, "Domino"),
    c(0x1F044, None, "DOMINO TILE HORIZONTAL-02-05", 0x00, "Domino"),
    c(0x1F045, None, "DOMINO TILE HORIZONTAL-02-06", 0x00, "Domino"),
    c(0x1F046, None, "DOMINO TILE HORIZONTAL-03-00", 0x00, "Domino"),
    c(0x1F047, None, "DOMINO TILE HORIZONTAL-03-01", 0x00, "Domino"),
    c(0x1F048, None, "DOMINO TILE HORIZONTAL-03-02", 0x00, "Domino"),
    c(0x1F049, None, "DOMINO TILE HORIZONTAL-03-03", 0x00, "Domino"),
    c(0x1F04A, None, "DOMINO TILE HORIZONTAL-03-04", 0x00, "Domino"),
    c(0x1F04B, None, "DOMINO TILE HORIZONTAL-03-05", 0x00, "Domino"),
    c(0x1F04C, None, "DOMINO TILE HORIZONTAL-03-06", 0x00, "Domino"),
    c(0x1F04D, None, "DOMINO TILE HORIZONTAL-04-00", 0x00, "Domino"),
    c(0x1F04E, None, "DOMINO TILE HORIZONTAL-04-01", 0x00, "Domino"),
    c(0x1F04F, None, "DOMINO TILE HORIZONTAL-04-02", 0x00, "Domino"),
    c(0x1F050, None, "DOMINO TILE HORIZONTAL-04-03", 0x00, "Domino"),
    c(0x1F051, None, "DOMINO TILE HORIZONTAL-04-04", 0x00, "Domino"),
    c(0x1F052, None, "DOMINO TILE HORIZONTAL-04-05", 0x00, "Domino"),
    c(0x1F053, None, "DOMINO TILE HORIZONTAL-04-06", 0x00, "Domino"),
    c(0x1F054, None, "DOMINO TILE HORIZONTAL-05-00", 0x00, "Domino"),
    c(0x1F055, None, "DOMINO TILE HORIZONTAL-05-01", 0x00, "Domino"),
    c(0x1F056, None, "DOMINO TILE HORIZONTAL-05-02", 0x00, "Domino"),
    c(0x1F057, None, "DOMINO TILE HORIZONTAL-05-03", 0x00, "Domino"),
    c(0x1F058, None, "DOMINO TILE HORIZONTAL-05-04", 0x00, "Domino"),
    c(0x1F059, None, "DOMINO TILE HORIZONTAL-05-05", 0x00, "Domino"),
    c(0x1F05A, None, "DOMINO TILE HORIZONTAL-05-06", 0x00, "Domino"),
    c(0x1F05B, None, "DOMINO TILE HORIZONTAL-06-00", 0x00, "Domino"),
    c(0x1F05C, None, "DOMINO TILE HORIZONTAL-06-01", 0x00, "Domino"),
    c(0x1F05D, None, "DOMINO TILE HORIZONTAL-06-02", 0x00, "Domino"),
    c(0x1F05E, None, "DOMINO TILE HORIZONTAL-06-03", 0x00, "Domino"),
    c(0x1F05F, None, "DOMINO TILE HORIZONTAL-06-04", 0x00, "Domino"),
    c(0x1F060, None, "DOMINO TILE HORIZONTAL-06-05", 0x00, "Domino"),
    c(0x1F061, None, "DOMINO TILE HORIZONTAL-06-06", 0x00, "Domino"),
    c(0x1F062, None, "DOMINO TILE VERTICAL BACK", 0x00, "Domino"),
    c(0x1F063, None, "DOMINO TILE VERTICAL-00-00", 0x00, "Domino"),
    c(0x1F064, None, "DOMINO TILE VERTICAL-00-01", 0x00, "Domino"),
    c(0x1F065, None, "DOMINO TILE VERTICAL-00-02", 0x00, "Domino"),
    c(0x1F066, None, "DOMINO TILE VERTICAL-00-03", 0x00, "Domino"),
    c(0x1F067, None, "DOMINO TILE VERTICAL-00-04", 0x00, "Domino"),
    c(0x1F068, None, "DOMINO TILE VERTICAL-00-05", 0x00, "Domino"),
    c(0x1F069, None, "DOMINO TILE VERTICAL-00-06", 0x00, "Domino"),
    c(0x1F06A, None, "DOMINO TILE VERTICAL-01-00", 0x00, "Domino"),
    c(0x1F06B, None, "DOMINO TILE VERTICAL-01-01", 0x00, "Domino"),
    c(0x1F06C, None, "DOMINO TILE VERTICAL-01-02", 0x00, "Domino"),
    c(0x1F06D, None, "DOMINO TILE VERTICAL-01-03", 0x00, "Domino"),
    c(0x1F06E, None, "DOMINO TILE VERTICAL-01-04", 0x00, "Domino"),
    c(0x1F06F, None, "DOMINO TILE VERTICAL-01-05", 0x00, "Domino"),
    c(0x1F070, None, "DOMINO TILE VERTICAL-01-06", 0x00, "Domino"),
    c(0x1F071, None, "DOMINO TILE VERTICAL-02-00", 0x00, "Domino"),
    c(0x1F072, None, "DOMINO TILE VERTICAL-02-01", 0x00, "Domino"),
    c(0x1F073, None, "DOMINO TILE VERTICAL-02-02", 0x00, "Domino"),
    c(0x1F074, None, "DOMINO TILE VERTICAL-02-03", 0x00, "Domino"),
    c(0x1F075, None, "DOMINO TILE VERTICAL-02-04", 0x00, "Domino"),
    c(0x1F076, None, "DOMINO TILE VERTICAL-02-05", 0x00, "Domino"),
    c(0x1F077, None, "DOMINO TILE VERTICAL-02-06", 0x00, "Domino"),
    c(0x1F078, None, "DOMINO TILE VERTICAL-03-00", 0x00, "Domino"),
    c(0x1F079, None, "DOMINO TILE VERTICAL-03-01", 0x00, "Domino"),
    c(0x1F07A, None, "DOMINO TILE VERTICAL-03-02", 0x00, "Domino"),
    c(0x1F07B, None, "DOMINO TILE VERTICAL-03-03", 0x00, "Domino"),
    c(0x1F07C, None, "DOMINO TILE VERTICAL-03-04", 0x00, "Domino"),
    c(0x1F07D, None, "DOMINO TILE VERTICAL-03-05", 0x00, "Domino"),
    c(0x1F07E, None, "DOMINO TILE VERTICAL-03-06", 0x00, "Domino"),
    c(0x1F07F, None, "DOMINO TILE VERTICAL-04-00", 0x00, "Domino"),
    c(0x1F080, None, "DOMINO TILE VERTICAL-04-01", 0x00, "Domino"),
    c(0x1F081, None, "DOMINO TILE VERTICAL-04-02", 0x00, "Domino"),
    c(0x1F082, None, "DOMINO TILE VERTICAL-04-03", 0x00, "Domino"),
    c(0x1F083, None, "DOMINO TILE VERTICAL-04-04", 0x00, "Domino"),
    c(0x1F084, None, "DOMINO TILE VERTICAL-04-05", 0x00, "Domino"),
    c(0x1F085, None, "DOMINO TILE VERTICAL-04-06", 0x00, "Domino"),
    c(0x1F086, None, "DOMINO TILE VERTICAL-05-00", 0x00, "Domino"),
    c(0x1F087, None, "DOMINO TILE VERTICAL-05-01", 0x00, "Domino"),
    c(0x1F088, None, "DOMINO TILE VERTICAL-05-02", 0x00, "Domino"),
    c(0x1F089, None, "DOMINO TILE VERTICAL-05-03", 0x00, "Domino"),
    c(0x1F08A, None, "DOMINO TILE VERTICAL-05-04", 0x00, "Domino"),
    c(0x1F08B, None, "DOMINO TILE VERTICAL-05-05", 0x00, "Domino"),
    c(0x1F08C, None, "DOMINO TILE VERTICAL-05-06", 0x00, "Domino"),
    c(0x1F08D, None, "DOMINO TILE VERTICAL-06-00", 0x00, "Domino"),
    c(0x1F08E, None, "DOMINO TILE VERTICAL-06-01", 0x00, "Domino"),
    c(0x1F08F, None, "DOMINO TILE VERTICAL-06-02", 0x00, "Domino"),
    c(0x1F090, None, "DOMINO TILE VERTICAL-06-03", 0x00, "Domino"),
    c(0x1F091, None, "DOMINO TILE VERTICAL-06-04", 0x00, "Domino"),
    c(0x1F092, None, "DOMINO TILE VERTICAL-06-05", 0x00, "Domino"),
    c(0x1F093, None, "DOMINO TILE VERTICAL-06-06", 0x00, "Domino"),
    c(0x1F0A0, None, "PLAYING CARD BACK", 0x00, "Playing_Cards"),
    c(0x1F0A1, None, "PLAYING CARD ACE OF SPADES", 0x00, "Playing_Cards"),
    c(0x1F0A2, None, "PLAYING CARD TWO OF SPADES", 0x00, "Playing_Cards"),
    c(0x1F0A3, None, "PLAYING CARD THREE OF SPADES", 0x00, "Playing_Cards"),
    c(0x1F0A4, None, "PLAYING CARD FOUR OF SPADES", 0x00, "Playing_Cards"),
    c(0x1F0A5, None, "PLAYING CARD FIVE OF SPADES", 0x00, "Playing_Cards"),
    c(0x1F0A6, None, "PLAYING CARD SIX OF SPADES", 0x00, "Playing_Cards"),
    c(0x1F0A7, None, "PLAYING CARD SEVEN OF SPADES", 0x00, "Playing_Cards"),
    c(0x1F0A8, None, "PLAYING CARD EIGHT OF SPADES", 0x00, "Playing_Cards"),
    c(0x1F0A9, None, "PLAYING CARD NINE OF SPADES", 0x00, "Playing_Cards"),
    c(0x1F0AA, None, "PLAYING CARD TEN OF SPADES", 0x00, "Playing_Cards"),
    c(0x1F0AB, None, "PLAYING CARD JACK OF SPADES", 0x00, "Playing_Cards"),
    c(0x1F0AC, None, "PLAYING CARD KNIGHT OF SPADES", 0x00, "Playing_Cards"),
    c(0x1F0AD, None, "PLAYING CARD QUEEN OF SPADES", 0x00, "Playing_Cards"),
    c(0x1F0AE, None, "PLAYING CARD KING OF SPADES", 0x00, "Playing_Cards"),
    c(0x1F0B1, None, "PLAYING CARD ACE OF HEARTS", 0x00, "Playing_Cards"),
    c(0x1F0B2, None, "PLAYING CARD TWO OF HEARTS", 0x00, "Playing_Cards"),
    c(0x1F0B3, None, "PLAYING CARD THREE OF HEARTS", 0x00, "Playing_Cards"),
    c(0x1F0B4, None, "PLAYING CARD FOUR OF HEARTS", 0x00, "Playing_Cards"),
    c(0x1F0B5, None, "PLAYING CARD FIVE OF HEARTS", 0x00, "Playing_Cards"),
    c(0x1F0B6, None, "PLAYING CARD SIX OF HEARTS", 0x00, "Playing_Cards"),
    c(0x1F0B7, None, "PLAYING CARD SEVEN OF HEARTS", 0x00, "Playing_Cards"),
    c(0x1F0B8, None, "PLAYING CARD EIGHT OF HEARTS", 0x00, "Playing_Cards"),
    c(0x1F0B9, None, "PLAYING CARD NINE OF HEARTS", 0x00, "Playing_Cards"),
    c(0x1F0BA, None, "PLAYING CARD TEN OF HEARTS", 0x00, "Playing_Cards"),
    c(0x1F0BB, None, "PLAYING CARD JACK OF HEARTS", 0x00, "Playing_Cards"),
    c(0x1F0BC, None, "PLAYING CARD KNIGHT OF HEARTS", 0x00, "Playing_Cards"),
    c(0x1F0BD, None, "PLAYING CARD QUEEN OF HEARTS", 0x00, "Playing_Cards"),
    c(0x1F0BE, None, "PLAYING CARD KING OF HEARTS", 0x00, "Playing_Cards"),
    c(0x1F0BF, None, "PLAYING CARD RED JOKER", 0x00, "Playing_Cards"),
    c(0x1F0C1, None, "PLAYING CARD ACE OF DIAMONDS", 0x00, "Playing_Cards"),
    c(0x1F0C2, None, "PLAYING CARD TWO OF DIAMONDS", 0x00, "Playing_Cards"),
    c(0x1F0C3, None, "PLAYING CARD THREE OF DIAMONDS", 0x00, "Playing_Cards"),
    c(0x1F0C4, None, "PLAYING CARD FOUR OF DIAMONDS", 0x00, "Playing_Cards"),
    c(0x1F0C5, None, "PLAYING CARD FIVE OF DIAMONDS", 0x00, "Playing_Cards"),
    c(0x1F0C6, None, "PLAYING CARD SIX OF DIAMONDS", 0x00, "Playing_Cards"),
    c(0x1F0C7, None, "PLAYING CARD SEVEN OF DIAMONDS", 0x00, "Playing_Cards"),
    c(0x1F0C8, None, "PLAYING CARD EIGHT OF DIAMONDS", 0x00, "Playing_Cards"),
    c(0x1F0C9, None, "PLAYING CARD NINE OF DIAMONDS", 0x00, "Playing_Cards"),
    c(0x1F0CA, None, "PLAYING CARD TEN OF DIAMONDS", 0x00, "Playing_Cards"),
    c(0x1F0CB, None, "PLAYING CARD JACK OF DIAMONDS", 0x00, "Playing_Cards"),
    c(0x1F0CC, None, "PLAYING CARD KNIGHT OF DIAMONDS", 0x00, "Playing_Cards"),
    c(0x1F0CD, None, "PLAYING CARD QUEEN OF DIAMONDS", 0x00, "Playing_Cards"),
    c(0x1F0CE, None, "PLAYING CARD KING OF DIAMONDS", 0x00, "Playing_Cards"),
    c(0x1F0CF, None, "PLAYING CARD BLACK JOKER", 0x00, "Playing_Cards"),
    c(0x1F0D1, None, "PLAYING CARD ACE OF CLUBS", 0x00, "Playing_Cards"),
    c(0x1F0D2, None, "PLAYING CARD TWO OF CLUBS", 0x00, "Playing_Cards"),
    c(0x1F0D3, None, "PLAYING CARD THREE OF CLUBS", 0x00, "Playing_Cards"),
    c(0x1F0D4, None, "PLAYING CARD FOUR OF CLUBS", 0x00, "Playing_Cards"),
    c(0x1F0D5, None, "PLAYING CARD FIVE OF CLUBS", 0x00, "Playing_Cards"),
    c(0x1F0D6, None, "PLAYING CARD SIX OF CLUBS", 0x00, "Playing_Cards"),
    c(0x1F0D7, None, "PLAYING CARD SEVEN OF CLUBS", 0x00, "Playing_Cards"),
    c(0x1F0D8, None, "PLAYING CARD EIGHT OF CLUBS", 0x00, "Playing_Cards"),
    c(0x1F0D9, None, "PLAYING CARD NINE OF CLUBS", 0x00, "Playing_Cards"),
    c(0x1F0DA, None, "PLAYING CARD TEN OF CLUBS", 0x00, "Playing_Cards"),
    c(0x1F0DB, None, "PLAYING CARD JACK OF CLUBS", 0x00, "Playing_Cards"),
    c(0x1F0DC, None, "PLAYING CARD KNIGHT OF CLUBS", 0x00, "Playing_Cards"),
    c(0x1F0DD, None, "PLAYING CARD QUEEN OF CLUBS", 0x00, "Playing_Cards"),
    c(0x1F0DE, None, "PLAYING CARD KING OF CLUBS", 0x00, "Playing_Cards"),
    c(0x1F0DF, None, "PLAYING CARD WHITE JOKER", 0x00, "Playing_Cards"),
    c(0x1F0E0, None, "PLAYING CARD FOOL", 0x00, "Playing_Cards"),
    c(0x1F0E1, None, "PLAYING CARD TRUMP-1", 0x00, "Playing_Cards"),
    c(0x1F0E2, None, "PLAYING CARD TRUMP-2", 0x00, "Playing_Cards"),
    c(0x1F0E3, None, "PLAYING CARD TRUMP-3", 0x00, "Playing_Cards"),
    c(0x1F0E4, None, "PLAYING CARD TRUMP-4", 0x00, "Playing_Cards"),
    c(0x1F0E5, None, "PLAYING CARD TRUMP-5", 0x00, "Playing_Cards"),
    c(0x1F0E6, None, "PLAYING CARD TRUMP-6", 0x00, "Playing_Cards"),
    c(0x1F0E7, None, "PLAYING CARD TRUMP-7", 0x00, "Playing_Cards"),
    c(0x1F0E8, None, "PLAYING CARD TRUMP-8", 0x00, "Playing_Cards"),
    c(0x1F0E9, None, "PLAYING CARD TRUMP-9", 0x00, "Playing_Cards"),
    c(0x1F0EA, None, "PLAYING CARD TRUMP-10", 0x00, "Playing_Cards"),
    c(0x1F0EB, None, "PLAYING CARD TRUMP-11", 0x00, "Playing_Cards"),
    c(0x1F0EC, None, "PLAYING CARD TRUMP-12", 0x00, "Playing_Cards"),
    c(0x1F0ED, None, "PLAYING CARD TRUMP-13", 0x00, "Playing_Cards"),
    c(0x1F0EE, None, "PLAYING CARD TRUMP-14", 0x00, "Playing_Cards"),
    c(0x1F0EF, None, "PLAYING CARD TRUMP-15", 0x00, "Playing_Cards"),
    c(0x1F0F0, None, "PLAYING CARD TRUMP-16", 0x00, "Playing_Cards"),
    c(0x1F0F1, None, "PLAYING CARD TRUMP-17", 0x00, "Playing_Cards"),
    c(0x1F0F2, None, "PLAYING CARD TRUMP-18", 0x00, "Playing_Cards"),
    c(0x1F0F3, None, "PLAYING CARD TRUMP-19", 0x00, "Playing_Cards"),
    c(0x1F0F4, None, "PLAYING CARD TRUMP-20", 0x00, "Playing_Cards"),
    c(0x1F0F5, None, "PLAYING CARD TRUMP-21", 0x00, "Playing_Cards"),
    c(0x1F100, None, "DIGIT ZERO FULL STOP", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F101, None, "DIGIT ZERO COMMA", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F102, None, "DIGIT ONE COMMA", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F103, None, "DIGIT TWO COMMA", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F104, None, "DIGIT THREE COMMA", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F105, None, "DIGIT FOUR COMMA", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F106, None, "DIGIT FIVE COMMA", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F107, None, "DIGIT SIX COMMA", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F108, None, "DIGIT SEVEN COMMA", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F109, None, "DIGIT EIGHT COMMA", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F10A, None, "DIGIT NINE COMMA", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F10B, None, "DINGBAT CIRCLED SANS-SERIF DIGIT ZERO", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F10C, None, "DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT ZERO", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F10D, None, "CIRCLED ZERO WITH SLASH", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F10E, None, "CIRCLED ANTICLOCKWISE ARROW", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F10F, None, "CIRCLED DOLLAR SIGN WITH OVERLAID BACKSLASH", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F110, None, "PARENTHESIZED LATIN CAPITAL LETTER A", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F111, None, "PARENTHESIZED LATIN CAPITAL LETTER B", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F112, None, "PARENTHESIZED LATIN CAPITAL LETTER C", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F113, None, "PARENTHESIZED LATIN CAPITAL LETTER D", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F114, None, "PARENTHESIZED LATIN CAPITAL LETTER E", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F115, None, "PARENTHESIZED LATIN CAPITAL LETTER F", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F116, None, "PARENTHESIZED LATIN CAPITAL LETTER G", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F117, None, "PARENTHESIZED LATIN CAPITAL LETTER H", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F118, None, "PARENTHESIZED LATIN CAPITAL LETTER I", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F119, None, "PARENTHESIZED LATIN CAPITAL LETTER J", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F11A, None, "PARENTHESIZED LATIN CAPITAL LETTER K", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F11B, None, "PARENTHESIZED LATIN CAPITAL LETTER L", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F11C, None, "PARENTHESIZED LATIN CAPITAL LETTER M", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F11D, None, "PARENTHESIZED LATIN CAPITAL LETTER N", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F11E, None, "PARENTHESIZED LATIN CAPITAL LETTER O", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F11F, None, "PARENTHESIZED LATIN CAPITAL LETTER P", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F120, None, "PARENTHESIZED LATIN CAPITAL LETTER Q", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F121, None, "PARENTHESIZED LATIN CAPITAL LETTER R", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F122, None, "PARENTHESIZED LATIN CAPITAL LETTER S", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F123, None, "PARENTHESIZED LATIN CAPITAL LETTER T", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F124, None, "PARENTHESIZED LATIN CAPITAL LETTER U", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F125, None, "PARENTHESIZED LATIN CAPITAL LETTER V", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F126, None, "PARENTHESIZED LATIN CAPITAL LETTER W", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F127, None, "PARENTHESIZED LATIN CAPITAL LETTER X", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F128, None, "PARENTHESIZED LATIN CAPITAL LETTER Y", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F129, None, "PARENTHESIZED LATIN CAPITAL LETTER Z", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F12A, None, "TORTOISE SHELL BRACKETED LATIN CAPITAL LETTER S", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F12B, None, "CIRCLED ITALIC LATIN CAPITAL LETTER C", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F12C, None, "CIRCLED ITALIC LATIN CAPITAL LETTER R", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F12D, None, "CIRCLED CD", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F12E, None, "CIRCLED WZ", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F12F, None, "COPYLEFT SYMBOL", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F130, None, "SQUARED LATIN CAPITAL LETTER A", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F131, None, "SQUARED LATIN CAPITAL LETTER B", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F132, None, "SQUARED LATIN CAPITAL LETTER C", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F133, None, "SQUARED LATIN CAPITAL LETTER D", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F134, None, "SQUARED LATIN CAPITAL LETTER E", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F135, None, "SQUARED LATIN CAPITAL LETTER F", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F136, None, "SQUARED LATIN CAPITAL LETTER G", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F137, None, "SQUARED LATIN CAPITAL LETTER H", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F138, None, "SQUARED LATIN CAPITAL LETTER I", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F139, None, "SQUARED LATIN CAPITAL LETTER J", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F13A, None, "SQUARED LATIN CAPITAL LETTER K", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F13B, None, "SQUARED LATIN CAPITAL LETTER L", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F13C, None, "SQUARED LATIN CAPITAL LETTER M", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F13D, None, "SQUARED LATIN CAPITAL LETTER N", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F13E, None, "SQUARED LATIN CAPITAL LETTER O", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F13F, None, "SQUARED LATIN CAPITAL LETTER P", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F140, None, "SQUARED LATIN CAPITAL LETTER Q", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F141, None, "SQUARED LATIN CAPITAL LETTER R", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F142, None, "SQUARED LATIN CAPITAL LETTER S", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F143, None, "SQUARED LATIN CAPITAL LETTER T", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F144, None, "SQUARED LATIN CAPITAL LETTER U", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F145, None, "SQUARED LATIN CAPITAL LETTER V", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F146, None, "SQUARED LATIN CAPITAL LETTER W", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F147, None, "SQUARED LATIN CAPITAL LETTER X", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F148, None, "SQUARED LATIN CAPITAL LETTER Y", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F149, None, "SQUARED LATIN CAPITAL LETTER Z", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F14A, None, "SQUARED HV", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F14B, None, "SQUARED MV", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F14C, None, "SQUARED SD", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F14D, None, "SQUARED SS", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F14E, None, "SQUARED PPV", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F14F, None, "SQUARED WC", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F150, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER A", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F151, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER B", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F152, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER C", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F153, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER D", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F154, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER E", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F155, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER F", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F156, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER G", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F157, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER H", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F158, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER I", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F159, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER J", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F15A, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER K", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F15B, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER L", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F15C, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER M", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F15D, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER N", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F15E, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER O", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F15F, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER P", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F160, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER Q", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F161, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER R", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F162, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER S", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F163, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER T", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F164, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER U", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F165, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER V", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F166, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER W", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F167, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER X", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F168, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER Y", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F169, None, "NEGATIVE CIRCLED LATIN CAPITAL LETTER Z", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F16A, None, "RAISED MC SIGN", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F16B, None, "RAISED MD SIGN", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F16C, None, "RAISED MR SIGN", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F16D, None, "CIRCLED CC", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F16E, None, "CIRCLED C WITH OVERLAID BACKSLASH", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F16F, None, "CIRCLED HUMAN FIGURE", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F170, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER A", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F171, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER B", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F172, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER C", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F173, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER D", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F174, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER E", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F175, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER F", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F176, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER G", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F177, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER H", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F178, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER I", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F179, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER J", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F17A, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER K", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F17B, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER L", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F17C, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER M", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F17D, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER N", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F17E, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER O", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F17F, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER P", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F180, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER Q", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F181, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER R", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F182, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER S", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F183, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER T", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F184, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER U", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F185, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER V", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F186, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER W", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F187, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER X", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F188, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER Y", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F189, None, "NEGATIVE SQUARED LATIN CAPITAL LETTER Z", 0x01, "Enclosed_Alphanum_Sup"),
    c(0x1F18A, None, "CROSSED NEGATIVE SQUARED LATIN CAPITAL LETTER P", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F18B, None, "NEGATIVE SQUARED IC", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F18C, None, "NEGATIVE SQUARED PA", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F18D, None, "NEGATIVE SQUARED SA", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F18E, None, "NEGATIVE SQUARED AB", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F18F, None, "NEGATIVE SQUARED WC", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F190, None, "SQUARE DJ", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F191, None, "SQUARED CL", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F192, None, "SQUARED COOL", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F193, None, "SQUARED FREE", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F194, None, "SQUARED ID", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F195, None, "SQUARED NEW", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F196, None, "SQUARED NG", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F197, None, "SQUARED OK", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F198, None, "SQUARED SOS", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F199, None, "SQUARED UP WITH EXCLAMATION MARK", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F19A, None, "SQUARED VS", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F19B, None, "SQUARED THREE D", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F19C, None, "SQUARED SECOND SCREEN", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F19D, None, "SQUARED TWO K", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F19E, None, "SQUARED FOUR K", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F19F, None, "SQUARED EIGHT K", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1A0, None, "SQUARED FIVE POINT ONE", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1A1, None, "SQUARED SEVEN POINT ONE", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1A2, None, "SQUARED TWENTY-TWO POINT TWO", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1A3, None, "SQUARED SIXTY P", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1A4, None, "SQUARED ONE HUNDRED TWENTY P", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1A5, None, "SQUARED LATIN SMALL LETTER D", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1A6, None, "SQUARED HC", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1A7, None, "SQUARED HDR", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1A8, None, "SQUARED HI-RES", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1A9, None, "SQUARED LOSSLESS", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1AA, None, "SQUARED SHV", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1AB, None, "SQUARED UHD", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1AC, None, "SQUARED VOD", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1AD, None, "MASK WORK SYMBOL", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1E6, None, "REGIONAL INDICATOR SYMBOL LETTER A", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1E7, None, "REGIONAL INDICATOR SYMBOL LETTER B", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1E8, None, "REGIONAL INDICATOR SYMBOL LETTER C", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1E9, None, "REGIONAL INDICATOR SYMBOL LETTER D", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1EA, None, "REGIONAL INDICATOR SYMBOL LETTER E", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1EB, None, "REGIONAL INDICATOR SYMBOL LETTER F", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1EC, None, "REGIONAL INDICATOR SYMBOL LETTER G", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1ED, None, "REGIONAL INDICATOR SYMBOL LETTER H", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1EE, None, "REGIONAL INDICATOR SYMBOL LETTER I", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1EF, None, "REGIONAL INDICATOR SYMBOL LETTER J", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1F0, None, "REGIONAL INDICATOR SYMBOL LETTER K", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1F1, None, "REGIONAL INDICATOR SYMBOL LETTER L", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1F2, None, "REGIONAL INDICATOR SYMBOL LETTER M", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1F3, None, "REGIONAL INDICATOR SYMBOL LETTER N", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1F4, None, "REGIONAL INDICATOR SYMBOL LETTER O", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1F5, None, "REGIONAL INDICATOR SYMBOL LETTER P", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1F6, None, "REGIONAL INDICATOR SYMBOL LETTER Q", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1F7, None, "REGIONAL INDICATOR SYMBOL LETTER R", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1F8, None, "REGIONAL INDICATOR SYMBOL LETTER S", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1F9, None, "REGIONAL INDICATOR SYMBOL LETTER T", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1FA, None, "REGIONAL INDICATOR SYMBOL LETTER U", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1FB, None, "REGIONAL INDICATOR SYMBOL LETTER V", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1FC, None, "REGIONAL INDICATOR SYMBOL LETTER W", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1FD, None, "REGIONAL INDICATOR SYMBOL LETTER X", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1FE, None, "REGIONAL INDICATOR SYMBOL LETTER Y", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F1FF, None, "REGIONAL INDICATOR SYMBOL LETTER Z", 0x00, "Enclosed_Alphanum_Sup"),
    c(0x1F200, None, "SQUARE HIRAGANA HOKA", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F201, None, "SQUARED KATAKANA KOKO", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F202, None, "SQUARED KATAKANA SA", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F210, None, "SQUARED CJK UNIFIED IDEOGRAPH-624B", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F211, None, "SQUARED CJK UNIFIED IDEOGRAPH-5B57", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F212, None, "SQUARED CJK UNIFIED IDEOGRAPH-53CC", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F213, None, "SQUARED KATAKANA DE", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F214, None, "SQUARED CJK UNIFIED IDEOGRAPH-4E8C", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F215, None, "SQUARED CJK UNIFIED IDEOGRAPH-591A", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F216, None, "SQUARED CJK UNIFIED IDEOGRAPH-89E3", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F217, None, "SQUARED CJK UNIFIED IDEOGRAPH-5929", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F218, None, "SQUARED CJK UNIFIED IDEOGRAPH-4EA4", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F219, None, "SQUARED CJK UNIFIED IDEOGRAPH-6620", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F21A, None, "SQUARED CJK UNIFIED IDEOGRAPH-7121", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F21B, None, "SQUARED CJK UNIFIED IDEOGRAPH-6599", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F21C, None, "SQUARED CJK UNIFIED IDEOGRAPH-524D", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F21D, None, "SQUARED CJK UNIFIED IDEOGRAPH-5F8C", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F21E, None, "SQUARED CJK UNIFIED IDEOGRAPH-518D", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F21F, None, "SQUARED CJK UNIFIED IDEOGRAPH-65B0", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F220, None, "SQUARED CJK UNIFIED IDEOGRAPH-521D", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F221, None, "SQUARED CJK UNIFIED IDEOGRAPH-7D42", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F222, None, "SQUARED CJK UNIFIED IDEOGRAPH-751F", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F223, None, "SQUARED CJK UNIFIED IDEOGRAPH-8CA9", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F224, None, "SQUARED CJK UNIFIED IDEOGRAPH-58F0", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F225, None, "SQUARED CJK UNIFIED IDEOGRAPH-5439", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F226, None, "SQUARED CJK UNIFIED IDEOGRAPH-6F14", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F227, None, "SQUARED CJK UNIFIED IDEOGRAPH-6295", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F228, None, "SQUARED CJK UNIFIED IDEOGRAPH-6355", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F229, None, "SQUARED CJK UNIFIED IDEOGRAPH-4E00", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F22A, None, "SQUARED CJK UNIFIED IDEOGRAPH-4E09", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F22B, None, "SQUARED CJK UNIFIED IDEOGRAPH-904A", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F22C, None, "SQUARED CJK UNIFIED IDEOGRAPH-5DE6", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F22D, None, "SQUARED CJK UNIFIED IDEOGRAPH-4E2D", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F22E, None, "SQUARED CJK UNIFIED IDEOGRAPH-53F3", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F22F, None, "SQUARED CJK UNIFIED IDEOGRAPH-6307", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F230, None, "SQUARED CJK UNIFIED IDEOGRAPH-8D70", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F231, None, "SQUARED CJK UNIFIED IDEOGRAPH-6253", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F232, None, "SQUARED CJK UNIFIED IDEOGRAPH-7981", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F233, None, "SQUARED CJK UNIFIED IDEOGRAPH-7A7A", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F234, None, "SQUARED CJK UNIFIED IDEOGRAPH-5408", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F235, None, "SQUARED CJK UNIFIED IDEOGRAPH-6E80", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F236, None, "SQUARED CJK UNIFIED IDEOGRAPH-6709", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F237, None, "SQUARED CJK UNIFIED IDEOGRAPH-6708", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F238, None, "SQUARED CJK UNIFIED IDEOGRAPH-7533", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F239, None, "SQUARED CJK UNIFIED IDEOGRAPH-5272", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F23A, None, "SQUARED CJK UNIFIED IDEOGRAPH-55B6", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F23B, None, "SQUARED CJK UNIFIED IDEOGRAPH-914D", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F240, None, "TORTOISE SHELL BRACKETED CJK UNIFIED IDEOGRAPH-672C", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F241, None, "TORTOISE SHELL BRACKETED CJK UNIFIED IDEOGRAPH-4E09", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F242, None, "TORTOISE SHELL BRACKETED CJK UNIFIED IDEOGRAPH-4E8C", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F243, None, "TORTOISE SHELL BRACKETED CJK UNIFIED IDEOGRAPH-5B89", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F244, None, "TORTOISE SHELL BRACKETED CJK UNIFIED IDEOGRAPH-70B9", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F245, None, "TORTOISE SHELL BRACKETED CJK UNIFIED IDEOGRAPH-6253", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F246, None, "TORTOISE SHELL BRACKETED CJK UNIFIED IDEOGRAPH-76D7", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F247, None, "TORTOISE SHELL BRACKETED CJK UNIFIED IDEOGRAPH-52DD", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F248, None, "TORTOISE SHELL BRACKETED CJK UNIFIED IDEOGRAPH-6557", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F250, None, "CIRCLED IDEOGRAPH ADVANTAGE", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F251, None, "CIRCLED IDEOGRAPH ACCEPT", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F260, None, "ROUNDED SYMBOL FOR FU", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F261, None, "ROUNDED SYMBOL FOR LU", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F262, None, "ROUNDED SYMBOL FOR SHOU", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F263, None, "ROUNDED SYMBOL FOR XI", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F264, None, "ROUNDED SYMBOL FOR SHUANGXI", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F265, None, "ROUNDED SYMBOL FOR CAI", 0x00, "Enclosed_Ideographic_Sup"),
    c(0x1F300, None, "CYCLONE", 0x00, "Misc_Pictographs"),
    c(0x1F301, None, "FOGGY", 0x00, "Misc_Pictographs"),
    c(0x1F302, None, "CLOSED UMBRELLA", 0x00, "Misc_Pictographs"),
    c(0x1F303, None, "NIGHT WITH STARS", 0x00, "Misc_Pictographs"),
    c(0x1F304, None, "SUNRISE OVER MOUNTAINS", 0x00, "Misc_Pictographs"),
    c(0x1F305, None, "SUNRISE", 0x00, "Misc_Pictographs"),
    c(0x1F306, None, "CITYSCAPE AT DUSK", 0x00, "Misc_Pictographs"),
    c(0x1F307, None, "SUNSET OVER BUILDINGS", 0x00, "Misc_Pictographs"),
    c(0x1F308, None, "RAINBOW", 0x00, "Misc_Pictographs"),
    c(0x1F309, None, "BRIDGE AT NIGHT", 0x00, "Misc_Pictographs"),
    c(0x1F30A, None, "WATER WAVE", 0x00, "Misc_Pictographs"),
    c(0x1F30B, None, "VOLCANO", 0x00, "Misc_Pictographs"),
    c(0x1F30C, None, "MILKY WAY", 0x00, "Misc_Pictographs"),
    c(0x1F30D, None, "EARTH GLOBE EUROPE-AFRICA", 0x00, "Misc_Pictographs"),
    c(0x1F30E, None, "EARTH GLOBE AMERICAS", 0x00, "Misc_Pictographs"),
    c(0x1F30F, None, "EARTH GLOBE ASIA-AUSTRALIA", 0x00, "Misc_Pictographs"),
    c(0x1F310, None, "GLOBE WITH MERIDIANS", 0x00, "Misc_Pictographs"),
    c(0x1F311, None, "NEW MOON SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F312, None, "WAXING CRESCENT MOON SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F313, None, "FIRST QUARTER MOON SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F314, None, "WAXING GIBBOUS MOON SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F315, None, "FULL MOON SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F316, None, "WANING GIBBOUS MOON SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F317, None, "LAST QUARTER MOON SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F318, None, "WANING CRESCENT MOON SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F319, None, "CRESCENT MOON", 0x00, "Misc_Pictographs"),
    c(0x1F31A, None, "NEW MOON WITH FACE", 0x00, "Misc_Pictographs"),
    c(0x1F31B, None, "FIRST QUARTER MOON WITH FACE", 0x00, "Misc_Pictographs"),
    c(0x1F31C, None, "LAST QUARTER MOON WITH FACE", 0x00, "Misc_Pictographs"),
    c(0x1F31D, None, "FULL MOON WITH FACE", 0x00, "Misc_Pictographs"),
    c(0x1F31E, None, "SUN WITH FACE", 0x00, "Misc_Pictographs"),
    c(0x1F31F, None, "GLOWING STAR", 0x00, "Misc_Pictographs"),
    c(0x1F320, None, "SHOOTING STAR", 0x00, "Misc_Pictographs"),
    c(0x1F321, None, "THERMOMETER", 0x00, "Misc_Pictographs"),
    c(0x1F322, None, "BLACK DROPLET", 0x00, "Misc_Pictographs"),
    c(0x1F323, None, "WHITE SUN", 0x00, "Misc_Pictographs"),
    c(0x1F324, None, "WHITE SUN WITH SMALL CLOUD", 0x00, "Misc_Pictographs"),
    c(0x1F325, None, "WHITE SUN BEHIND CLOUD", 0x00, "Misc_Pictographs"),
    c(0x1F326, None, "WHITE SUN BEHIND CLOUD WITH RAIN", 0x00, "Misc_Pictographs"),
    c(0x1F327, None, "CLOUD WITH RAIN", 0x00, "Misc_Pictographs"),
    c(0x1F328, None, "CLOUD WITH SNOW", 0x00, "Misc_Pictographs"),
    c(0x1F329, None, "CLOUD WITH LIGHTNING", 0x00, "Misc_Pictographs"),
    c(0x1F32A, None, "CLOUD WITH TORNADO", 0x00, "Misc_Pictographs"),
    c(0x1F32B, None, "FOG", 0x00, "Misc_Pictographs"),
    c(0x1F32C, None, "WIND BLOWING FACE", 0x00, "Misc_Pictographs"),
    c(0x1F32D, None, "HOT DOG", 0x00, "Misc_Pictographs"),
    c(0x1F32E, None, "TACO", 0x00, "Misc_Pictographs"),
    c(0x1F32F, None, "BURRITO", 0x00, "Misc_Pictographs"),
    c(0x1F330, None, "CHESTNUT", 0x00, "Misc_Pictographs"),
    c(0x1F331, None, "SEEDLING", 0x00, "Misc_Pictographs"),
    c(0x1F332, None, "EVERGREEN TREE", 0x00, "Misc_Pictographs"),
    c(0x1F333, None, "DECIDUOUS TREE", 0x00, "Misc_Pictographs"),
    c(0x1F334, None, "PALM TREE", 0x00, "Misc_Pictographs"),
    c(0x1F335, None, "CACTUS", 0x00, "Misc_Pictographs"),
    c(0x1F336, None, "HOT PEPPER", 0x00, "Misc_Pictographs"),
    c(0x1F337, None, "TULIP", 0x00, "Misc_Pictographs"),
    c(0x1F338, None, "CHERRY BLOSSOM", 0x00, "Misc_Pictographs"),
    c(0x1F339, None, "ROSE", 0x00, "Misc_Pictographs"),
    c(0x1F33A, None, "HIBISCUS", 0x00, "Misc_Pictographs"),
    c(0x1F33B, None, "SUNFLOWER", 0x00, "Misc_Pictographs"),
    c(0x1F33C, None, "BLOSSOM", 0x00, "Misc_Pictographs"),
    c(0x1F33D, None, "EAR OF MAIZE", 0x00, "Misc_Pictographs"),
    c(0x1F33E, None, "EAR OF RICE", 0x00, "Misc_Pictographs"),
    c(0x1F33F, None, "HERB", 0x00, "Misc_Pictographs"),
    c(0x1F340, None, "FOUR LEAF CLOVER", 0x00, "Misc_Pictographs"),
    c(0x1F341, None, "MAPLE LEAF", 0x00, "Misc_Pictographs"),
    c(0x1F342, None, "FALLEN LEAF", 0x00, "Misc_Pictographs"),
    c(0x1F343, None, "LEAF FLUTTERING IN WIND", 0x00, "Misc_Pictographs"),
    c(0x1F344, None, "MUSHROOM", 0x00, "Misc_Pictographs"),
    c(0x1F345, None, "TOMATO", 0x00, "Misc_Pictographs"),
    c(0x1F346, None, "AUBERGINE", 0x00, "Misc_Pictographs"),
    c(0x1F347, None, "GRAPES", 0x00, "Misc_Pictographs"),
    c(0x1F348, None, "MELON", 0x00, "Misc_Pictographs"),
    c(0x1F349, None, "WATERMELON", 0x00, "Misc_Pictographs"),
    c(0x1F34A, None, "TANGERINE", 0x00, "Misc_Pictographs"),
    c(0x1F34B, None, "LEMON", 0x00, "Misc_Pictographs"),
    c(0x1F34C, None, "BANANA", 0x00, "Misc_Pictographs"),
    c(0x1F34D, None, "PINEAPPLE", 0x00, "Misc_Pictographs"),
    c(0x1F34E, None, "RED APPLE", 0x00, "Misc_Pictographs"),
    c(0x1F34F, None, "GREEN APPLE", 0x00, "Misc_Pictographs"),
    c(0x1F350, None, "PEAR", 0x00, "Misc_Pictographs"),
    c(0x1F351, None, "PEACH", 0x00, "Misc_Pictographs"),
    c(0x1F352, None, "CHERRIES", 0x00, "Misc_Pictographs"),
    c(0x1F353, None, "STRAWBERRY", 0x00, "Misc_Pictographs"),
    c(0x1F354, None, "HAMBURGER", 0x00, "Misc_Pictographs"),
    c(0x1F355, None, "SLICE OF PIZZA", 0x00, "Misc_Pictographs"),
    c(0x1F356, None, "MEAT ON BONE", 0x00, "Misc_Pictographs"),
    c(0x1F357, None, "POULTRY LEG", 0x00, "Misc_Pictographs"),
    c(0x1F358, None, "RICE CRACKER", 0x00, "Misc_Pictographs"),
    c(0x1F359, None, "RICE BALL", 0x00, "Misc_Pictographs"),
    c(0x1F35A, None, "COOKED RICE", 0x00, "Misc_Pictographs"),
    c(0x1F35B, None, "CURRY AND RICE", 0x00, "Misc_Pictographs"),
    c(0x1F35C, None, "STEAMING BOWL", 0x00, "Misc_Pictographs"),
    c(0x1F35D, None, "SPAGHETTI", 0x00, "Misc_Pictographs"),
    c(0x1F35E, None, "BREAD", 0x00, "Misc_Pictographs"),
    c(0x1F35F, None, "FRENCH FRIES", 0x00, "Misc_Pictographs"),
    c(0x1F360, None, "ROASTED SWEET POTATO", 0x00, "Misc_Pictographs"),
    c(0x1F361, None, "DANGO", 0x00, "Misc_Pictographs"),
    c(0x1F362, None, "ODEN", 0x00, "Misc_Pictographs"),
    c(0x1F363, None, "SUSHI", 0x00, "Misc_Pictographs"),
    c(0x1F364, None, "FRIED SHRIMP", 0x00, "Misc_Pictographs"),
    c(0x1F365, None, "FISH CAKE WITH SWIRL DESIGN", 0x00, "Misc_Pictographs"),
    c(0x1F366, None, "SOFT ICE CREAM", 0x00, "Misc_Pictographs"),
    c(0x1F367, None, "SHAVED ICE", 0x00, "Misc_Pictographs"),
    c(0x1F368, None, "ICE CREAM", 0x00, "Misc_Pictographs"),
    c(0x1F369, None, "DOUGHNUT", 0x00, "Misc_Pictographs"),
    c(0x1F36A, None, "COOKIE", 0x00, "Misc_Pictographs"),
    c(0x1F36B, None, "CHOCOLATE BAR", 0x00, "Misc_Pictographs"),
    c(0x1F36C, None, "CANDY", 0x00, "Misc_Pictographs"),
    c(0x1F36D, None, "LOLLIPOP", 0x00, "Misc_Pictographs"),
    c(0x1F36E, None, "CUSTARD", 0x00, "Misc_Pictographs"),
    c(0x1F36F, None, "HONEY POT", 0x00, "Misc_Pictographs"),
    c(0x1F370, None, "SHORTCAKE", 0x00, "Misc_Pictographs"),
    c(0x1F371, None, "BENTO BOX", 0x00, "Misc_Pictographs"),
    c(0x1F372, None, "POT OF FOOD", 0x00, "Misc_Pictographs"),
    c(0x1F373, None, "COOKING", 0x00, "Misc_Pictographs"),
    c(0x1F374, None, "FORK AND KNIFE", 0x00, "Misc_Pictographs"),
    c(0x1F375, None, "TEACUP WITHOUT HANDLE", 0x00, "Misc_Pictographs"),
    c(0x1F376, None, "SAKE BOTTLE AND CUP", 0x00, "Misc_Pictographs"),
    c(0x1F377, None, "WINE GLASS", 0x00, "Misc_Pictographs"),
    c(0x1F378, None, "COCKTAIL GLASS", 0x00, "Misc_Pictographs"),
    c(0x1F379, None, "TROPICAL DRINK", 0x00, "Misc_Pictographs"),
    c(0x1F37A, None, "BEER MUG", 0x00, "Misc_Pictographs"),
    c(0x1F37B, None, "CLINKING BEER MUGS", 0x00, "Misc_Pictographs"),
    c(0x1F37C, None, "BABY BOTTLE", 0x00, "Misc_Pictographs"),
    c(0x1F37D, None, "FORK AND KNIFE WITH PLATE", 0x00, "Misc_Pictographs"),
    c(0x1F37E, None, "BOTTLE WITH POPPING CORK", 0x00, "Misc_Pictographs"),
    c(0x1F37F, None, "POPCORN", 0x00, "Misc_Pictographs"),
    c(0x1F380, None, "RIBBON", 0x00, "Misc_Pictographs"),
    c(0x1F381, None, "WRAPPED PRESENT", 0x00, "Misc_Pictographs"),
    c(0x1F382, None, "BIRTHDAY CAKE", 0x00, "Misc_Pictographs"),
    c(0x1F383, None, "JACK-O-LANTERN", 0x00, "Misc_Pictographs"),
    c(0x1F384, None, "CHRISTMAS TREE", 0x00, "Misc_Pictographs"),
    c(0x1F385, None, "FATHER CHRISTMAS", 0x00, "Misc_Pictographs"),
    c(0x1F386, None, "FIREWORKS", 0x00, "Misc_Pictographs"),
    c(0x1F387, None, "FIREWORK SPARKLER", 0x00, "Misc_Pictographs"),
    c(0x1F388, None, "BALLOON", 0x00, "Misc_Pictographs"),
    c(0x1F389, None, "PARTY POPPER", 0x00, "Misc_Pictographs"),
    c(0x1F38A, None, "CONFETTI BALL", 0x00, "Misc_Pictographs"),
    c(0x1F38B, None, "TANABATA TREE", 0x00, "Misc_Pictographs"),
    c(0x1F38C, None, "CROSSED FLAGS", 0x00, "Misc_Pictographs"),
    c(0x1F38D, None, "PINE DECORATION", 0x00, "Misc_Pictographs"),
    c(0x1F38E, None, "JAPANESE DOLLS", 0x00, "Misc_Pictographs"),
    c(0x1F38F, None, "CARP STREAMER", 0x00, "Misc_Pictographs"),
    c(0x1F390, None, "WIND CHIME", 0x00, "Misc_Pictographs"),
    c(0x1F391, None, "MOON VIEWING CEREMONY", 0x00, "Misc_Pictographs"),
    c(0x1F392, None, "SCHOOL SATCHEL", 0x00, "Misc_Pictographs"),
    c(0x1F393, None, "GRADUATION CAP", 0x00, "Misc_Pictographs"),
    c(0x1F394, None, "HEART WITH TIP ON THE LEFT", 0x00, "Misc_Pictographs"),
    c(0x1F395, None, "BOUQUET OF FLOWERS", 0x00, "Misc_Pictographs"),
    c(0x1F396, None, "MILITARY MEDAL", 0x00, "Misc_Pictographs"),
    c(0x1F397, None, "REMINDER RIBBON", 0x00, "Misc_Pictographs"),
    c(0x1F398, None, "MUSICAL KEYBOARD WITH JACKS", 0x00, "Misc_Pictographs"),
    c(0x1F399, None, "STUDIO MICROPHONE", 0x00, "Misc_Pictographs"),
    c(0x1F39A, None, "LEVEL SLIDER", 0x00, "Misc_Pictographs"),
    c(0x1F39B, None, "CONTROL KNOBS", 0x00, "Misc_Pictographs"),
    c(0x1F39C, None, "BEAMED ASCENDING MUSICAL NOTES", 0x00, "Misc_Pictographs"),
    c(0x1F39D, None, "BEAMED DESCENDING MUSICAL NOTES", 0x00, "Misc_Pictographs"),
    c(0x1F39E, None, "FILM FRAMES", 0x00, "Misc_Pictographs"),
    c(0x1F39F, None, "ADMISSION TICKETS", 0x00, "Misc_Pictographs"),
    c(0x1F3A0, None, "CAROUSEL HORSE", 0x00, "Misc_Pictographs"),
    c(0x1F3A1, None, "FERRIS WHEEL", 0x00, "Misc_Pictographs"),
    c(0x1F3A2, None, "ROLLER COASTER", 0x00, "Misc_Pictographs"),
    c(0x1F3A3, None, "FISHING POLE AND FISH", 0x00, "Misc_Pictographs"),
    c(0x1F3A4, None, "MICROPHONE", 0x00, "Misc_Pictographs"),
    c(0x1F3A5, None, "MOVIE CAMERA", 0x00, "Misc_Pictographs"),
    c(0x1F3A6, None, "CINEMA", 0x00, "Misc_Pictographs"),
    c(0x1F3A7, None, "HEADPHONE", 0x00, "Misc_Pictographs"),
    c(0x1F3A8, None, "ARTIST PALETTE", 0x00, "Misc_Pictographs"),
    c(0x1F3A9, None, "TOP HAT", 0x00, "Misc_Pictographs"),
    c(0x1F3AA, None, "CIRCUS TENT", 0x00, "Misc_Pictographs"),
    c(0x1F3AB, None, "TICKET", 0x00, "Misc_Pictographs"),
    c(0x1F3AC, None, "CLAPPER BOARD", 0x00, "Misc_Pictographs"),
    c(0x1F3AD, None, "PERFORMING ARTS", 0x00, "Misc_Pictographs"),
    c(0x1F3AE, None, "VIDEO GAME", 0x00, "Misc_Pictographs"),
    c(0x1F3AF, None, "DIRECT HIT", 0x00, "Misc_Pictographs"),
    c(0x1F3B0, None, "SLOT MACHINE", 0x00, "Misc_Pictographs"),
    c(0x1F3B1, None, "BILLIARDS", 0x00, "Misc_Pictographs"),
    c(0x1F3B2, None, "GAME DIE", 0x00, "Misc_Pictographs"),
    c(0x1F3B3, None, "BOWLING", 0x00, "Misc_Pictographs"),
    c(0x1F3B4, None, "FLOWER PLAYING CARDS", 0x00, "Misc_Pictographs"),
    c(0x1F3B5, None, "MUSICAL NOTE", 0x00, "Misc_Pictographs"),
    c(0x1F3B6, None, "MULTIPLE MUSICAL NOTES", 0x00, "Misc_Pictographs"),
    c(0x1F3B7, None, "SAXOPHONE", 0x00, "Misc_Pictographs"),
    c(0x1F3B8, None, "GUITAR", 0x00, "Misc_Pictographs"),
    c(0x1F3B9, None, "MUSICAL KEYBOARD", 0x00, "Misc_Pictographs"),
    c(0x1F3BA, None, "TRUMPET", 0x00, "Misc_Pictographs"),
    c(0x1F3BB, None, "VIOLIN", 0x00, "Misc_Pictographs"),
    c(0x1F3BC, None, "MUSICAL SCORE", 0x00, "Misc_Pictographs"),
    c(0x1F3BD, None, "RUNNING SHIRT WITH SASH", 0x00, "Misc_Pictographs"),
    c(0x1F3BE, None, "TENNIS RACQUET AND BALL", 0x00, "Misc_Pictographs"),
    c(0x1F3BF, None, "SKI AND SKI BOOT", 0x00, "Misc_Pictographs"),
    c(0x1F3C0, None, "BASKETBALL AND HOOP", 0x00, "Misc_Pictographs"),
    c(0x1F3C1, None, "CHEQUERED FLAG", 0x00, "Misc_Pictographs"),
    c(0x1F3C2, None, "SNOWBOARDER", 0x00, "Misc_Pictographs"),
    c(0x1F3C3, None, "RUNNER", 0x00, "Misc_Pictographs"),
    c(0x1F3C4, None, "SURFER", 0x00, "Misc_Pictographs"),
    c(0x1F3C5, None, "SPORTS MEDAL", 0x00, "Misc_Pictographs"),
    c(0x1F3C6, None, "TROPHY", 0x00, "Misc_Pictographs"),
    c(0x1F3C7, None, "HORSE RACING", 0x00, "Misc_Pictographs"),
    c(0x1F3C8, None, "AMERICAN FOOTBALL", 0x00, "Misc_Pictographs"),
    c(0x1F3C9, None, "RUGBY FOOTBALL", 0x00, "Misc_Pictographs"),
    c(0x1F3CA, None, "SWIMMER", 0x00, "Misc_Pictographs"),
    c(0x1F3CB, None, "WEIGHT LIFTER", 0x00, "Misc_Pictographs"),
    c(0x1F3CC, None, "GOLFER", 0x00, "Misc_Pictographs"),
    c(0x1F3CD, None, "RACING MOTORCYCLE", 0x00, "Misc_Pictographs"),
    c(0x1F3CE, None, "RACING CAR", 0x00, "Misc_Pictographs"),
    c(0x1F3CF, None, "CRICKET BAT AND BALL", 0x00, "Misc_Pictographs"),
    c(0x1F3D0, None, "VOLLEYBALL", 0x00, "Misc_Pictographs"),
    c(0x1F3D1, None, "FIELD HOCKEY STICK AND BALL", 0x00, "Misc_Pictographs"),
    c(0x1F3D2, None, "ICE HOCKEY STICK AND PUCK", 0x00, "Misc_Pictographs"),
    c(0x1F3D3, None, "TABLE TENNIS PADDLE AND BALL", 0x00, "Misc_Pictographs"),
    c(0x1F3D4, None, "SNOW CAPPED MOUNTAIN", 0x00, "Misc_Pictographs"),
    c(0x1F3D5, None, "CAMPING", 0x00, "Misc_Pictographs"),
    c(0x1F3D6, None, "BEACH WITH UMBRELLA", 0x00, "Misc_Pictographs"),
    c(0x1F3D7, None, "BUILDING CONSTRUCTION", 0x00, "Misc_Pictographs"),
    c(0x1F3D8, None, "HOUSE BUILDINGS", 0x00, "Misc_Pictographs"),
    c(0x1F3D9, None, "CITYSCAPE", 0x00, "Misc_Pictographs"),
    c(0x1F3DA, None, "DERELICT HOUSE BUILDING", 0x00, "Misc_Pictographs"),
    c(0x1F3DB, None, "CLASSICAL BUILDING", 0x00, "Misc_Pictographs"),
    c(0x1F3DC, None, "DESERT", 0x00, "Misc_Pictographs"),
    c(0x1F3DD, None, "DESERT ISLAND", 0x00, "Misc_Pictographs"),
    c(0x1F3DE, None, "NATIONAL PARK", 0x00, "Misc_Pictographs"),
    c(0x1F3DF, None, "STADIUM", 0x00, "Misc_Pictographs"),
    c(0x1F3E0, None, "HOUSE BUILDING", 0x00, "Misc_Pictographs"),
    c(0x1F3E1, None, "HOUSE WITH GARDEN", 0x00, "Misc_Pictographs"),
    c(0x1F3E2, None, "OFFICE BUILDING", 0x00, "Misc_Pictographs"),
    c(0x1F3E3, None, "JAPANESE POST OFFICE", 0x00, "Misc_Pictographs"),
    c(0x1F3E4, None, "EUROPEAN POST OFFICE", 0x00, "Misc_Pictographs"),
    c(0x1F3E5, None, "HOSPITAL", 0x00, "Misc_Pictographs"),
    c(0x1F3E6, None, "BANK", 0x00, "Misc_Pictographs"),
    c(0x1F3E7, None, "AUTOMATED TELLER MACHINE", 0x00, "Misc_Pictographs"),
    c(0x1F3E8, None, "HOTEL", 0x00, "Misc_Pictographs"),
    c(0x1F3E9, None, "LOVE HOTEL", 0x00, "Misc_Pictographs"),
    c(0x1F3EA, None, "CONVENIENCE STORE", 0x00, "Misc_Pictographs"),
    c(0x1F3EB, None, "SCHOOL", 0x00, "Misc_Pictographs"),
    c(0x1F3EC, None, "DEPARTMENT STORE", 0x00, "Misc_Pictographs"),
    c(0x1F3ED, None, "FACTORY", 0x00, "Misc_Pictographs"),
    c(0x1F3EE, None, "IZAKAYA LANTERN", 0x00, "Misc_Pictographs"),
    c(0x1F3EF, None, "JAPANESE CASTLE", 0x00, "Misc_Pictographs"),
    c(0x1F3F0, None, "EUROPEAN CASTLE", 0x00, "Misc_Pictographs"),
    c(0x1F3F1, None, "WHITE PENNANT", 0x00, "Misc_Pictographs"),
    c(0x1F3F2, None, "BLACK PENNANT", 0x00, "Misc_Pictographs"),
    c(0x1F3F3, None, "WAVING WHITE FLAG", 0x00, "Misc_Pictographs"),
    c(0x1F3F4, None, "WAVING BLACK FLAG", 0x00, "Misc_Pictographs"),
    c(0x1F3F5, None, "ROSETTE", 0x00, "Misc_Pictographs"),
    c(0x1F3F6, None, "BLACK ROSETTE", 0x00, "Misc_Pictographs"),
    c(0x1F3F7, None, "LABEL", 0x00, "Misc_Pictographs"),
    c(0x1F3F8, None, "BADMINTON RACQUET AND SHUTTLECOCK", 0x00, "Misc_Pictographs"),
    c(0x1F3F9, None, "BOW AND ARROW", 0x00, "Misc_Pictographs"),
    c(0x1F3FA, None, "AMPHORA", 0x00, "Misc_Pictographs"),
    c(0x1F3FB, None, "EMOJI MODIFIER FITZPATRICK TYPE-1-2", 0x00, "Misc_Pictographs"),
    c(0x1F3FC, None, "EMOJI MODIFIER FITZPATRICK TYPE-3", 0x00, "Misc_Pictographs"),
    c(0x1F3FD, None, "EMOJI MODIFIER FITZPATRICK TYPE-4", 0x00, "Misc_Pictographs"),
    c(0x1F3FE, None, "EMOJI MODIFIER FITZPATRICK TYPE-5", 0x00, "Misc_Pictographs"),
    c(0x1F3FF, None, "EMOJI MODIFIER FITZPATRICK TYPE-6", 0x00, "Misc_Pictographs"),
    c(0x1F400, None, "RAT", 0x00, "Misc_Pictographs"),
    c(0x1F401, None, "MOUSE", 0x00, "Misc_Pictographs"),
    c(0x1F402, None, "OX", 0x00, "Misc_Pictographs"),
    c(0x1F403, None, "WATER BUFFALO", 0x00, "Misc_Pictographs"),
    c(0x1F404, None, "COW", 0x00, "Misc_Pictographs"),
    c(0x1F405, None, "TIGER", 0x00, "Misc_Pictographs"),
    c(0x1F406, None, "LEOPARD", 0x00, "Misc_Pictographs"),
    c(0x1F407, None, "RABBIT", 0x00, "Misc_Pictographs"),
    c(0x1F408, None, "CAT", 0x00, "Misc_Pictographs"),
    c(0x1F409, None, "DRAGON", 0x00, "Misc_Pictographs"),
    c(0x1F40A, None, "CROCODILE", 0x00, "Misc_Pictographs"),
    c(0x1F40B, None, "WHALE", 0x00, "Misc_Pictographs"),
    c(0x1F40C, None, "SNAIL", 0x00, "Misc_Pictographs"),
    c(0x1F40D, None, "SNAKE", 0x00, "Misc_Pictographs"),
    c(0x1F40E, None, "HORSE", 0x00, "Misc_Pictographs"),
    c(0x1F40F, None, "RAM", 0x00, "Misc_Pictographs"),
    c(0x1F410, None, "GOAT", 0x00, "Misc_Pictographs"),
    c(0x1F411, None, "SHEEP", 0x00, "Misc_Pictographs"),
    c(0x1F412, None, "MONKEY", 0x00, "Misc_Pictographs"),
    c(0x1F413, None, "ROOSTER", 0x00, "Misc_Pictographs"),
    c(0x1F414, None, "CHICKEN", 0x00, "Misc_Pictographs"),
    c(0x1F415, None, "DOG", 0x00, "Misc_Pictographs"),
    c(0x1F416, None, "PIG", 0x00, "Misc_Pictographs"),
    c(0x1F417, None, "BOAR", 0x00, "Misc_Pictographs"),
    c(0x1F418, None, "ELEPHANT", 0x00, "Misc_Pictographs"),
    c(0x1F419, None, "OCTOPUS", 0x00, "Misc_Pictographs"),
    c(0x1F41A, None, "SPIRAL SHELL", 0x00, "Misc_Pictographs"),
    c(0x1F41B, None, "BUG", 0x00, "Misc_Pictographs"),
    c(0x1F41C, None, "ANT", 0x00, "Misc_Pictographs"),
    c(0x1F41D, None, "HONEYBEE", 0x00, "Misc_Pictographs"),
    c(0x1F41E, None, "LADY BEETLE", 0x00, "Misc_Pictographs"),
    c(0x1F41F, None, "FISH", 0x00, "Misc_Pictographs"),
    c(0x1F420, None, "TROPICAL FISH", 0x00, "Misc_Pictographs"),
    c(0x1F421, None, "BLOWFISH", 0x00, "Misc_Pictographs"),
    c(0x1F422, None, "TURTLE", 0x00, "Misc_Pictographs"),
    c(0x1F423, None, "HATCHING CHICK", 0x00, "Misc_Pictographs"),
    c(0x1F424, None, "BABY CHICK", 0x00, "Misc_Pictographs"),
    c(0x1F425, None, "FRONT-FACING BABY CHICK", 0x00, "Misc_Pictographs"),
    c(0x1F426, None, "BIRD", 0x00, "Misc_Pictographs"),
    c(0x1F427, None, "PENGUIN", 0x00, "Misc_Pictographs"),
    c(0x1F428, None, "KOALA", 0x00, "Misc_Pictographs"),
    c(0x1F429, None, "POODLE", 0x00, "Misc_Pictographs"),
    c(0x1F42A, None, "DROMEDARY CAMEL", 0x00, "Misc_Pictographs"),
    c(0x1F42B, None, "BACTRIAN CAMEL", 0x00, "Misc_Pictographs"),
    c(0x1F42C, None, "DOLPHIN", 0x00, "Misc_Pictographs"),
    c(0x1F42D, None, "MOUSE FACE", 0x00, "Misc_Pictographs"),
    c(0x1F42E, None, "COW FACE", 0x00, "Misc_Pictographs"),
    c(0x1F42F, None, "TIGER FACE", 0x00, "Misc_Pictographs"),
    c(0x1F430, None, "RABBIT FACE", 0x00, "Misc_Pictographs"),
    c(0x1F431, None, "CAT FACE", 0x00, "Misc_Pictographs"),
    c(0x1F432, None, "DRAGON FACE", 0x00, "Misc_Pictographs"),
    c(0x1F433, None, "SPOUTING WHALE", 0x00, "Misc_Pictographs"),
    c(0x1F434, None, "HORSE FACE", 0x00, "Misc_Pictographs"),
    c(0x1F435, None, "MONKEY FACE", 0x00, "Misc_Pictographs"),
    c(0x1F436, None, "DOG FACE", 0x00, "Misc_Pictographs"),
    c(0x1F437, None, "PIG FACE", 0x00, "Misc_Pictographs"),
    c(0x1F438, None, "FROG FACE", 0x00, "Misc_Pictographs"),
    c(0x1F439, None, "HAMSTER FACE", 0x00, "Misc_Pictographs"),
    c(0x1F43A, None, "WOLF FACE", 0x00, "Misc_Pictographs"),
    c(0x1F43B, None, "BEAR FACE", 0x00, "Misc_Pictographs"),
    c(0x1F43C, None, "PANDA FACE", 0x00, "Misc_Pictographs"),
    c(0x1F43D, None, "PIG NOSE", 0x00, "Misc_Pictographs"),
    c(0x1F43E, None, "PAW PRINTS", 0x00, "Misc_Pictographs"),
    c(0x1F43F, None, "CHIPMUNK", 0x00, "Misc_Pictographs"),
    c(0x1F440, None, "EYES", 0x00, "Misc_Pictographs"),
    c(0x1F441, None, "EYE", 0x00, "Misc_Pictographs"),
    c(0x1F442, None, "EAR", 0x00, "Misc_Pictographs"),
    c(0x1F443, None, "NOSE", 0x00, "Misc_Pictographs"),
    c(0x1F444, None, "MOUTH", 0x00, "Misc_Pictographs"),
    c(0x1F445, None, "TONGUE", 0x00, "Misc_Pictographs"),
    c(0x1F446, None, "WHITE UP POINTING BACKHAND INDEX", 0x00, "Misc_Pictographs"),
    c(0x1F447, None, "WHITE DOWN POINTING BACKHAND INDEX", 0x00, "Misc_Pictographs"),
    c(0x1F448, None, "WHITE LEFT POINTING BACKHAND INDEX", 0x00, "Misc_Pictographs"),
    c(0x1F449, None, "WHITE RIGHT POINTING BACKHAND INDEX", 0x00, "Misc_Pictographs"),
    c(0x1F44A, None, "FISTED HAND SIGN", 0x00, "Misc_Pictographs"),
    c(0x1F44B, None, "WAVING HAND SIGN", 0x00, "Misc_Pictographs"),
    c(0x1F44C, None, "OK HAND SIGN", 0x00, "Misc_Pictographs"),
    c(0x1F44D, None, "THUMBS UP SIGN", 0x00, "Misc_Pictographs"),
    c(0x1F44E, None, "THUMBS DOWN SIGN", 0x00, "Misc_Pictographs"),
    c(0x1F44F, None, "CLAPPING HANDS SIGN", 0x00, "Misc_Pictographs"),
    c(0x1F450, None, "OPEN HANDS SIGN", 0x00, "Misc_Pictographs"),
    c(0x1F451, None, "CROWN", 0x00, "Misc_Pictographs"),
    c(0x1F452, None, "WOMANS HAT", 0x00, "Misc_Pictographs"),
    c(0x1F453, None, "EYEGLASSES", 0x00, "Misc_Pictographs"),
    c(0x1F454, None, "NECKTIE", 0x00, "Misc_Pictographs"),
    c(0x1F455, None, "T-SHIRT", 0x00, "Misc_Pictographs"),
    c(0x1F456, None, "JEANS", 0x00, "Misc_Pictographs"),
    c(0x1F457, None, "DRESS", 0x00, "Misc_Pictographs"),
    c(0x1F458, None, "KIMONO", 0x00, "Misc_Pictographs"),
    c(0x1F459, None, "BIKINI", 0x00, "Misc_Pictographs"),
    c(0x1F45A, None, "WOMANS CLOTHES", 0x00, "Misc_Pictographs"),
    c(0x1F45B, None, "PURSE", 0x00, "Misc_Pictographs"),
    c(0x1F45C, None, "HANDBAG", 0x00, "Misc_Pictographs"),
    c(0x1F45D, None, "POUCH", 0x00, "Misc_Pictographs"),
    c(0x1F45E, None, "MANS SHOE", 0x00, "Misc_Pictographs"),
    c(0x1F45F, None, "ATHLETIC SHOE", 0x00, "Misc_Pictographs"),
    c(0x1F460, None, "HIGH-HEELED SHOE", 0x00, "Misc_Pictographs"),
    c(0x1F461, None, "WOMANS SANDAL", 0x00, "Misc_Pictographs"),
    c(0x1F462, None, "WOMANS BOOTS", 0x00, "Misc_Pictographs"),
    c(0x1F463, None, "FOOTPRINTS", 0x00, "Misc_Pictographs"),
    c(0x1F464, None, "BUST IN SILHOUETTE", 0x00, "Misc_Pictographs"),
    c(0x1F465, None, "BUSTS IN SILHOUETTE", 0x00, "Misc_Pictographs"),
    c(0x1F466, None, "BOY", 0x00, "Misc_Pictographs"),
    c(0x1F467, None, "GIRL", 0x00, "Misc_Pictographs"),
    c(0x1F468, None, "MAN", 0x00, "Misc_Pictographs"),
    c(0x1F469, None, "WOMAN", 0x00, "Misc_Pictographs"),
    c(0x1F46A, None, "FAMILY", 0x00, "Misc_Pictographs"),
    c(0x1F46B, None, "MAN AND WOMAN HOLDING HANDS", 0x00, "Misc_Pictographs"),
    c(0x1F46C, None, "TWO MEN HOLDING HANDS", 0x00, "Misc_Pictographs"),
    c(0x1F46D, None, "TWO WOMEN HOLDING HANDS", 0x00, "Misc_Pictographs"),
    c(0x1F46E, None, "POLICE OFFICER", 0x00, "Misc_Pictographs"),
    c(0x1F46F, None, "WOMAN WITH BUNNY EARS", 0x00, "Misc_Pictographs"),
    c(0x1F470, None, "BRIDE WITH VEIL", 0x00, "Misc_Pictographs"),
    c(0x1F471, None, "PERSON WITH BLOND HAIR", 0x00, "Misc_Pictographs"),
    c(0x1F472, None, "MAN WITH GUA PI MAO", 0x00, "Misc_Pictographs"),
    c(0x1F473, None, "MAN WITH TURBAN", 0x00, "Misc_Pictographs"),
    c(0x1F474, None, "OLDER MAN", 0x00, "Misc_Pictographs"),
    c(0x1F475, None, "OLDER WOMAN", 0x00, "Misc_Pictographs"),
    c(0x1F476, None, "BABY", 0x00, "Misc_Pictographs"),
    c(0x1F477, None, "CONSTRUCTION WORKER", 0x00, "Misc_Pictographs"),
    c(0x1F478, None, "PRINCESS", 0x00, "Misc_Pictographs"),
    c(0x1F479, None, "JAPANESE OGRE", 0x00, "Misc_Pictographs"),
    c(0x1F47A, None, "JAPANESE GOBLIN", 0x00, "Misc_Pictographs"),
    c(0x1F47B, None, "GHOST", 0x00, "Misc_Pictographs"),
    c(0x1F47C, None, "BABY ANGEL", 0x00, "Misc_Pictographs"),
    c(0x1F47D, None, "EXTRATERRESTRIAL ALIEN", 0x00, "Misc_Pictographs"),
    c(0x1F47E, None, "ALIEN MONSTER", 0x00, "Misc_Pictographs"),
    c(0x1F47F, None, "IMP", 0x00, "Misc_Pictographs"),
    c(0x1F480, None, "SKULL", 0x00, "Misc_Pictographs"),
    c(0x1F481, None, "INFORMATION DESK PERSON", 0x00, "Misc_Pictographs"),
    c(0x1F482, None, "GUARDSMAN", 0x00, "Misc_Pictographs"),
    c(0x1F483, None, "DANCER", 0x00, "Misc_Pictographs"),
    c(0x1F484, None, "LIPSTICK", 0x00, "Misc_Pictographs"),
    c(0x1F485, None, "NAIL POLISH", 0x00, "Misc_Pictographs"),
    c(0x1F486, None, "FACE MASSAGE", 0x00, "Misc_Pictographs"),
    c(0x1F487, None, "HAIRCUT", 0x00, "Misc_Pictographs"),
    c(0x1F488, None, "BARBER POLE", 0x00, "Misc_Pictographs"),
    c(0x1F489, None, "SYRINGE", 0x00, "Misc_Pictographs"),
    c(0x1F48A, None, "PILL", 0x00, "Misc_Pictographs"),
    c(0x1F48B, None, "KISS MARK", 0x00, "Misc_Pictographs"),
    c(0x1F48C, None, "LOVE LETTER", 0x00, "Misc_Pictographs"),
    c(0x1F48D, None, "RING", 0x00, "Misc_Pictographs"),
    c(0x1F48E, None, "GEM STONE", 0x00, "Misc_Pictographs"),
    c(0x1F48F, None, "KISS", 0x00, "Misc_Pictographs"),
    c(0x1F490, None, "BOUQUET", 0x00, "Misc_Pictographs"),
    c(0x1F491, None, "COUPLE WITH HEART", 0x00, "Misc_Pictographs"),
    c(0x1F492, None, "WEDDING", 0x00, "Misc_Pictographs"),
    c(0x1F493, None, "BEATING HEART", 0x00, "Misc_Pictographs"),
    c(0x1F494, None, "BROKEN HEART", 0x00, "Misc_Pictographs"),
    c(0x1F495, None, "TWO HEARTS", 0x00, "Misc_Pictographs"),
    c(0x1F496, None, "SPARKLING HEART", 0x00, "Misc_Pictographs"),
    c(0x1F497, None, "GROWING HEART", 0x00, "Misc_Pictographs"),
    c(0x1F498, None, "HEART WITH ARROW", 0x00, "Misc_Pictographs"),
    c(0x1F499, None, "BLUE HEART", 0x00, "Misc_Pictographs"),
    c(0x1F49A, None, "GREEN HEART", 0x00, "Misc_Pictographs"),
    c(0x1F49B, None, "YELLOW HEART", 0x00, "Misc_Pictographs"),
    c(0x1F49C, None, "PURPLE HEART", 0x00, "Misc_Pictographs"),
    c(0x1F49D, None, "HEART WITH RIBBON", 0x00, "Misc_Pictographs"),
    c(0x1F49E, None, "REVOLVING HEARTS", 0x00, "Misc_Pictographs"),
    c(0x1F49F, None, "HEART DECORATION", 0x00, "Misc_Pictographs"),
    c(0x1F4A0, None, "DIAMOND SHAPE WITH A DOT INSIDE", 0x00, "Misc_Pictographs"),
    c(0x1F4A1, None, "ELECTRIC LIGHT BULB", 0x00, "Misc_Pictographs"),
    c(0x1F4A2, None, "ANGER SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F4A3, None, "BOMB", 0x00, "Misc_Pictographs"),
    c(0x1F4A4, None, "SLEEPING SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F4A5, None, "COLLISION SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F4A6, None, "SPLASHING SWEAT SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F4A7, None, "DROPLET", 0x00, "Misc_Pictographs"),
    c(0x1F4A8, None, "DASH SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F4A9, None, "PILE OF POO", 0x00, "Misc_Pictographs"),
    c(0x1F4AA, None, "FLEXED BICEPS", 0x00, "Misc_Pictographs"),
    c(0x1F4AB, None, "DIZZY SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F4AC, None, "SPEECH BALLOON", 0x00, "Misc_Pictographs"),
    c(0x1F4AD, None, "THOUGHT BALLOON", 0x00, "Misc_Pictographs"),
    c(0x1F4AE, None, "WHITE FLOWER", 0x00, "Misc_Pictographs"),
    c(0x1F4AF, None, "HUNDRED POINTS SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F4B0, None, "MONEY BAG", 0x00, "Misc_Pictographs"),
    c(0x1F4B1, None, "CURRENCY EXCHANGE", 0x00, "Misc_Pictographs"),
    c(0x1F4B2, None, "HEAVY DOLLAR SIGN", 0x00, "Misc_Pictographs"),
    c(0x1F4B3, None, "CREDIT CARD", 0x00, "Misc_Pictographs"),
    c(0x1F4B4, None, "BANKNOTE WITH YEN SIGN", 0x00, "Misc_Pictographs"),
    c(0x1F4B5, None, "BANKNOTE WITH DOLLAR SIGN", 0x00, "Misc_Pictographs"),
    c(0x1F4B6, None, "BANKNOTE WITH EURO SIGN", 0x00, "Misc_Pictographs"),
    c(0x1F4B7, None, "BANKNOTE WITH POUND SIGN", 0x00, "Misc_Pictographs"),
    c(0x1F4B8, None, "MONEY WITH WINGS", 0x00, "Misc_Pictographs"),
    c(0x1F4B9, None, "CHART WITH UPWARDS TREND AND YEN SIGN", 0x00, "Misc_Pictographs"),
    c(0x1F4BA, None, "SEAT", 0x00, "Misc_Pictographs"),
    c(0x1F4BB, None, "PERSONAL COMPUTER", 0x00, "Misc_Pictographs"),
    c(0x1F4BC, None, "BRIEFCASE", 0x00, "Misc_Pictographs"),
    c(0x1F4BD, None, "MINIDISC", 0x00, "Misc_Pictographs"),
    c(0x1F4BE, None, "FLOPPY DISK", 0x00, "Misc_Pictographs"),
    c(0x1F4BF, None, "OPTICAL DISC", 0x00, "Misc_Pictographs"),
    c(0x1F4C0, None, "DVD", 0x00, "Misc_Pictographs"),
    c(0x1F4C1, None, "FILE FOLDER", 0x00, "Misc_Pictographs"),
    c(0x1F4C2, None, "OPEN FILE FOLDER", 0x00, "Misc_Pictographs"),
    c(0x1F4C3, None, "PAGE WITH CURL", 0x00, "Misc_Pictographs"),
    c(0x1F4C4, None, "PAGE FACING UP", 0x00, "Misc_Pictographs"),
    c(0x1F4C5, None, "CALENDAR", 0x00, "Misc_Pictographs"),
    c(0x1F4C6, None, "TEAR-OFF CALENDAR", 0x00, "Misc_Pictographs"),
    c(0x1F4C7, None, "CARD INDEX", 0x00, "Misc_Pictographs"),
    c(0x1F4C8, None, "CHART WITH UPWARDS TREND", 0x00, "Misc_Pictographs"),
    c(0x1F4C9, None, "CHART WITH DOWNWARDS TREND", 0x00, "Misc_Pictographs"),
    c(0x1F4CA, None, "BAR CHART", 0x00, "Misc_Pictographs"),
    c(0x1F4CB, None, "CLIPBOARD", 0x00, "Misc_Pictographs"),
    c(0x1F4CC, None, "PUSHPIN", 0x00, "Misc_Pictographs"),
    c(0x1F4CD, None, "ROUND PUSHPIN", 0x00, "Misc_Pictographs"),
    c(0x1F4CE, None, "PAPERCLIP", 0x00, "Misc_Pictographs"),
    c(0x1F4CF, None, "STRAIGHT RULER", 0x00, "Misc_Pictographs"),
    c(0x1F4D0, None, "TRIANGULAR RULER", 0x00, "Misc_Pictographs"),
    c(0x1F4D1, None, "BOOKMARK TABS", 0x00, "Misc_Pictographs"),
    c(0x1F4D2, None, "LEDGER", 0x00, "Misc_Pictographs"),
    c(0x1F4D3, None, "NOTEBOOK", 0x00, "Misc_Pictographs"),
    c(0x1F4D4, None, "NOTEBOOK WITH DECORATIVE COVER", 0x00, "Misc_Pictographs"),
    c(0x1F4D5, None, "CLOSED BOOK", 0x00, "Misc_Pictographs"),
    c(0x1F4D6, None, "OPEN BOOK", 0x00, "Misc_Pictographs"),
    c(0x1F4D7, None, "GREEN BOOK", 0x00, "Misc_Pictographs"),
    c(0x1F4D8, None, "BLUE BOOK", 0x00, "Misc_Pictographs"),
    c(0x1F4D9, None, "ORANGE BOOK", 0x00, "Misc_Pictographs"),
    c(0x1F4DA, None, "BOOKS", 0x00, "Misc_Pictographs"),
    c(0x1F4DB, None, "NAME BADGE", 0x00, "Misc_Pictographs"),
    c(0x1F4DC, None, "SCROLL", 0x00, "Misc_Pictographs"),
    c(0x1F4DD, None, "MEMO", 0x00, "Misc_Pictographs"),
    c(0x1F4DE, None, "TELEPHONE RECEIVER", 0x00, "Misc_Pictographs"),
    c(0x1F4DF, None, "PAGER", 0x00, "Misc_Pictographs"),
    c(0x1F4E0, None, "FAX MACHINE", 0x00, "Misc_Pictographs"),
    c(0x1F4E1, None, "SATELLITE ANTENNA", 0x00, "Misc_Pictographs"),
    c(0x1F4E2, None, "PUBLIC ADDRESS LOUDSPEAKER", 0x00, "Misc_Pictographs"),
    c(0x1F4E3, None, "CHEERING MEGAPHONE", 0x00, "Misc_Pictographs"),
    c(0x1F4E4, None, "OUTBOX TRAY", 0x00, "Misc_Pictographs"),
    c(0x1F4E5, None, "INBOX TRAY", 0x00, "Misc_Pictographs"),
    c(0x1F4E6, None, "PACKAGE", 0x00, "Misc_Pictographs"),
    c(0x1F4E7, None, "E-MAIL SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F4E8, None, "INCOMING ENVELOPE", 0x00, "Misc_Pictographs"),
    c(0x1F4E9, None, "ENVELOPE WITH DOWNWARDS ARROW ABOVE", 0x00, "Misc_Pictographs"),
    c(0x1F4EA, None, "CLOSED MAILBOX WITH LOWERED FLAG", 0x00, "Misc_Pictographs"),
    c(0x1F4EB, None, "CLOSED MAILBOX WITH RAISED FLAG", 0x00, "Misc_Pictographs"),
    c(0x1F4EC, None, "OPEN MAILBOX WITH RAISED FLAG", 0x00, "Misc_Pictographs"),
    c(0x1F4ED, None, "OPEN MAILBOX WITH LOWERED FLAG", 0x00, "Misc_Pictographs"),
    c(0x1F4EE, None, "POSTBOX", 0x00, "Misc_Pictographs"),
    c(0x1F4EF, None, "POSTAL HORN", 0x00, "Misc_Pictographs"),
    c(0x1F4F0, None, "NEWSPAPER", 0x00, "Misc_Pictographs"),
    c(0x1F4F1, None, "MOBILE PHONE", 0x00, "Misc_Pictographs"),
    c(0x1F4F2, None, "MOBILE PHONE WITH RIGHTWARDS ARROW AT LEFT", 0x00, "Misc_Pictographs"),
    c(0x1F4F3, None, "VIBRATION MODE", 0x00, "Misc_Pictographs"),
    c(0x1F4F4, None, "MOBILE PHONE OFF", 0x00, "Misc_Pictographs"),
    c(0x1F4F5, None, "NO MOBILE PHONES", 0x00, "Misc_Pictographs"),
    c(0x1F4F6, None, "ANTENNA WITH BARS", 0x00, "Misc_Pictographs"),
    c(0x1F4F7, None, "CAMERA", 0x00, "Misc_Pictographs"),
    c(0x1F4F8, None, "CAMERA WITH FLASH", 0x00, "Misc_Pictographs"),
    c(0x1F4F9, None, "VIDEO CAMERA", 0x00, "Misc_Pictographs"),
    c(0x1F4FA, None, "TELEVISION", 0x00, "Misc_Pictographs"),
    c(0x1F4FB, None, "RADIO", 0x00, "Misc_Pictographs"),
    c(0x1F4FC, None, "VIDEOCASSETTE", 0x00, "Misc_Pictographs"),
    c(0x1F4FD, None, "FILM PROJECTOR", 0x00, "Misc_Pictographs"),
    c(0x1F4FE, None, "PORTABLE STEREO", 0x00, "Misc_Pictographs"),
    c(0x1F4FF, None, "PRAYER BEADS", 0x00, "Misc_Pictographs"),
    c(0x1F500, None, "TWISTED RIGHTWARDS ARROWS", 0x00, "Misc_Pictographs"),
    c(0x1F501, None, "CLOCKWISE RIGHTWARDS AND LEFTWARDS OPEN CIRCLE ARROWS", 0x00, "Misc_Pictographs"),
    c(0x1F502, None, "CLOCKWISE RIGHTWARDS AND LEFTWARDS OPEN CIRCLE ARROWS WITH CIRCLED ONE OVERLAY", 0x00, "Misc_Pictographs"),
    c(0x1F503, None, "CLOCKWISE DOWNWARDS AND UPWARDS OPEN CIRCLE ARROWS", 0x00, "Misc_Pictographs"),
    c(0x1F504, None, "ANTICLOCKWISE DOWNWARDS AND UPWARDS OPEN CIRCLE ARROWS", 0x00, "Misc_Pictographs"),
    c(0x1F505, None, "LOW BRIGHTNESS SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F506, None, "HIGH BRIGHTNESS SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F507, None, "SPEAKER WITH CANCELLATION STROKE", 0x00, "Misc_Pictographs"),
    c(0x1F508, None, "SPEAKER", 0x00, "Misc_Pictographs"),
    c(0x1F509, None, "SPEAKER WITH ONE SOUND WAVE", 0x00, "Misc_Pictographs"),
    c(0x1F50A, None, "SPEAKER WITH THREE SOUND WAVES", 0x00, "Misc_Pictographs"),
    c(0x1F50B, None, "BATTERY", 0x00, "Misc_Pictographs"),
    c(0x1F50C, None, "ELECTRIC PLUG", 0x00, "Misc_Pictographs"),
    c(0x1F50D, None, "LEFT-POINTING MAGNIFYING GLASS", 0x00, "Misc_Pictographs"),
    c(0x1F50E, None, "RIGHT-POINTING MAGNIFYING GLASS", 0x00, "Misc_Pictographs"),
    c(0x1F50F, None, "LOCK WITH INK PEN", 0x00, "Misc_Pictographs"),
    c(0x1F510, None, "CLOSED LOCK WITH KEY", 0x00, "Misc_Pictographs"),
    c(0x1F511, None, "KEY", 0x00, "Misc_Pictographs"),
    c(0x1F512, None, "LOCK", 0x00, "Misc_Pictographs"),
    c(0x1F513, None, "OPEN LOCK", 0x00, "Misc_Pictographs"),
    c(0x1F514, None, "BELL", 0x00, "Misc_Pictographs"),
    c(0x1F515, None, "BELL WITH CANCELLATION STROKE", 0x00, "Misc_Pictographs"),
    c(0x1F516, None, "BOOKMARK", 0x00, "Misc_Pictographs"),
    c(0x1F517, None, "LINK SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F518, None, "RADIO BUTTON", 0x00, "Misc_Pictographs"),
    c(0x1F519, None, "BACK WITH LEFTWARDS ARROW ABOVE", 0x00, "Misc_Pictographs"),
    c(0x1F51A, None, "END WITH LEFTWARDS ARROW ABOVE", 0x00, "Misc_Pictographs"),
    c(0x1F51B, None, "ON WITH EXCLAMATION MARK WITH LEFT RIGHT ARROW ABOVE", 0x00, "Misc_Pictographs"),
    c(0x1F51C, None, "SOON WITH RIGHTWARDS ARROW ABOVE", 0x00, "Misc_Pictographs"),
    c(0x1F51D, None, "TOP WITH UPWARDS ARROW ABOVE", 0x00, "Misc_Pictographs"),
    c(0x1F51E, None, "NO ONE UNDER EIGHTEEN SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F51F, None, "KEYCAP TEN", 0x00, "Misc_Pictographs"),
    c(0x1F520, None, "INPUT SYMBOL FOR LATIN CAPITAL LETTERS", 0x00, "Misc_Pictographs"),
    c(0x1F521, None, "INPUT SYMBOL FOR LATIN SMALL LETTERS", 0x00, "Misc_Pictographs"),
    c(0x1F522, None, "INPUT SYMBOL FOR NUMBERS", 0x00, "Misc_Pictographs"),
    c(0x1F523, None, "INPUT SYMBOL FOR SYMBOLS", 0x00, "Misc_Pictographs"),
    c(0x1F524, None, "INPUT SYMBOL FOR LATIN LETTERS", 0x00, "Misc_Pictographs"),
    c(0x1F525, None, "FIRE", 0x00, "Misc_Pictographs"),
    c(0x1F526, None, "ELECTRIC TORCH", 0x00, "Misc_Pictographs"),
    c(0x1F527, None, "WRENCH", 0x00, "Misc_Pictographs"),
    c(0x1F528, None, "HAMMER", 0x00, "Misc_Pictographs"),
    c(0x1F529, None, "NUT AND BOLT", 0x00, "Misc_Pictographs"),
    c(0x1F52A, None, "HOCHO", 0x00, "Misc_Pictographs"),
    c(0x1F52B, None, "PISTOL", 0x00, "Misc_Pictographs"),
    c(0x1F52C, None, "MICROSCOPE", 0x00, "Misc_Pictographs"),
    c(0x1F52D, None, "TELESCOPE", 0x00, "Misc_Pictographs"),
    c(0x1F52E, None, "CRYSTAL BALL", 0x00, "Misc_Pictographs"),
    c(0x1F52F, None, "SIX POINTED STAR WITH MIDDLE DOT", 0x00, "Misc_Pictographs"),
    c(0x1F530, None, "JAPANESE SYMBOL FOR BEGINNER", 0x00, "Misc_Pictographs"),
    c(0x1F531, None, "TRIDENT EMBLEM", 0x00, "Misc_Pictographs"),
    c(0x1F532, None, "BLACK SQUARE BUTTON", 0x00, "Misc_Pictographs"),
    c(0x1F533, None, "WHITE SQUARE BUTTON", 0x00, "Misc_Pictographs"),
    c(0x1F534, None, "LARGE RED CIRCLE", 0x00, "Misc_Pictographs"),
    c(0x1F535, None, "LARGE BLUE CIRCLE", 0x00, "Misc_Pictographs"),
    c(0x1F536, None, "LARGE ORANGE DIAMOND", 0x00, "Misc_Pictographs"),
    c(0x1F537, None, "LARGE BLUE DIAMOND", 0x00, "Misc_Pictographs"),
    c(0x1F538, None, "SMALL ORANGE DIAMOND", 0x00, "Misc_Pictographs"),
    c(0x1F539, None, "SMALL BLUE DIAMOND", 0x00, "Misc_Pictographs"),
    c(0x1F53A, None, "UP-POINTING RED TRIANGLE", 0x00, "Misc_Pictographs"),
    c(0x1F53B, None, "DOWN-POINTING RED TRIANGLE", 0x00, "Misc_Pictographs"),
    c(0x1F53C, None, "UP-POINTING SMALL RED TRIANGLE", 0x00, "Misc_Pictographs"),
    c(0x1F53D, None, "DOWN-POINTING SMALL RED TRIANGLE", 0x00, "Misc_Pictographs"),
    c(0x1F53E, None, "LOWER RIGHT SHADOWED WHITE CIRCLE", 0x00, "Misc_Pictographs"),
    c(0x1F53F, None, "UPPER RIGHT SHADOWED WHITE CIRCLE", 0x00, "Misc_Pictographs"),
    c(0x1F540, None, "CIRCLED CROSS POMMEE", 0x00, "Misc_Pictographs"),
    c(0x1F541, None, "CROSS POMMEE WITH HALF-CIRCLE BELOW", 0x00, "Misc_Pictographs"),
    c(0x1F542, None, "CROSS POMMEE", 0x00, "Misc_Pictographs"),
    c(0x1F543, None, "NOTCHED LEFT SEMICIRCLE WITH THREE DOTS", 0x00, "Misc_Pictographs"),
    c(0x1F544, None, "NOTCHED RIGHT SEMICIRCLE WITH THREE DOTS", 0x00, "Misc_Pictographs"),
    c(0x1F545, None, "SYMBOL FOR MARKS CHAPTER", 0x00, "Misc_Pictographs"),
    c(0x1F546, None, "WHITE LATIN CROSS", 0x00, "Misc_Pictographs"),
    c(0x1F547, None, "HEAVY LATIN CROSS", 0x00, "Misc_Pictographs"),
    c(0x1F548, None, "CELTIC CROSS", 0x00, "Misc_Pictographs"),
    c(0x1F549, None, "OM SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F54A, None, "DOVE OF PEACE", 0x00, "Misc_Pictographs"),
    c(0x1F54B, None, "KAABA", 0x00, "Misc_Pictographs"),
    c(0x1F54C, None, "MOSQUE", 0x00, "Misc_Pictographs"),
    c(0x1F54D, None, "SYNAGOGUE", 0x00, "Misc_Pictographs"),
    c(0x1F54E, None, "MENORAH WITH NINE BRANCHES", 0x00, "Misc_Pictographs"),
    c(0x1F54F, None, "BOWL OF HYGIEIA", 0x00, "Misc_Pictographs"),
    c(0x1F550, None, "CLOCK FACE ONE OCLOCK", 0x00, "Misc_Pictographs"),
    c(0x1F551, None, "CLOCK FACE TWO OCLOCK", 0x00, "Misc_Pictographs"),
    c(0x1F552, None, "CLOCK FACE THREE OCLOCK", 0x00, "Misc_Pictographs"),
    c(0x1F553, None, "CLOCK FACE FOUR OCLOCK", 0x00, "Misc_Pictographs"),
    c(0x1F554, None, "CLOCK FACE FIVE OCLOCK", 0x00, "Misc_Pictographs"),
    c(0x1F555, None, "CLOCK FACE SIX OCLOCK", 0x00, "Misc_Pictographs"),
    c(0x1F556, None, "CLOCK FACE SEVEN OCLOCK", 0x00, "Misc_Pictographs"),
    c(0x1F557, None, "CLOCK FACE EIGHT OCLOCK", 0x00, "Misc_Pictographs"),
    c(0x1F558, None, "CLOCK FACE NINE OCLOCK", 0x00, "Misc_Pictographs"),
    c(0x1F559, None, "CLOCK FACE TEN OCLOCK", 0x00, "Misc_Pictographs"),
    c(0x1F55A, None, "CLOCK FACE ELEVEN OCLOCK", 0x00, "Misc_Pictographs"),
    c(0x1F55B, None, "CLOCK FACE TWELVE OCLOCK", 0x00, "Misc_Pictographs"),
    c(0x1F55C, None, "CLOCK FACE ONE-THIRTY", 0x00, "Misc_Pictographs"),
    c(0x1F55D, None, "CLOCK FACE TWO-THIRTY", 0x00, "Misc_Pictographs"),
    c(0x1F55E, None, "CLOCK FACE THREE-THIRTY", 0x00, "Misc_Pictographs"),
    c(0x1F55F, None, "CLOCK FACE FOUR-THIRTY", 0x00, "Misc_Pictographs"),
    c(0x1F560, None, "CLOCK FACE FIVE-THIRTY", 0x00, "Misc_Pictographs"),
    c(0x1F561, None, "CLOCK FACE SIX-THIRTY", 0x00, "Misc_Pictographs"),
    c(0x1F562, None, "CLOCK FACE SEVEN-THIRTY", 0x00, "Misc_Pictographs"),
    c(0x1F563, None, "CLOCK FACE EIGHT-THIRTY", 0x00, "Misc_Pictographs"),
    c(0x1F564, None, "CLOCK FACE NINE-THIRTY", 0x00, "Misc_Pictographs"),
    c(0x1F565, None, "CLOCK FACE TEN-THIRTY", 0x00, "Misc_Pictographs"),
    c(0x1F566, None, "CLOCK FACE ELEVEN-THIRTY", 0x00, "Misc_Pictographs"),
    c(0x1F567, None, "CLOCK FACE TWELVE-THIRTY", 0x00, "Misc_Pictographs"),
    c(0x1F568, None, "RIGHT SPEAKER", 0x00, "Misc_Pictographs"),
    c(0x1F569, None, "RIGHT SPEAKER WITH ONE SOUND WAVE", 0x00, "Misc_Pictographs"),
    c(0x1F56A, None, "RIGHT SPEAKER WITH THREE SOUND WAVES", 0x00, "Misc_Pictographs"),
    c(0x1F56B, None, "BULLHORN", 0x00, "Misc_Pictographs"),
    c(0x1F56C, None, "BULLHORN WITH SOUND WAVES", 0x00, "Misc_Pictographs"),
    c(0x1F56D, None, "RINGING BELL", 0x00, "Misc_Pictographs"),
    c(0x1F56E, None, "BOOK", 0x00, "Misc_Pictographs"),
    c(0x1F56F, None, "CANDLE", 0x00, "Misc_Pictographs"),
    c(0x1F570, None, "MANTELPIECE CLOCK", 0x00, "Misc_Pictographs"),
    c(0x1F571, None, "BLACK SKULL AND CROSSBONES", 0x00, "Misc_Pictographs"),
    c(0x1F572, None, "NO PIRACY", 0x00, "Misc_Pictographs"),
    c(0x1F573, None, "HOLE", 0x00, "Misc_Pictographs"),
    c(0x1F574, None, "MAN IN BUSINESS SUIT LEVITATING", 0x00, "Misc_Pictographs"),
    c(0x1F575, None, "SLEUTH OR SPY", 0x00, "Misc_Pictographs"),
    c(0x1F576, None, "DARK SUNGLASSES", 0x00, "Misc_Pictographs"),
    c(0x1F577, None, "SPIDER", 0x00, "Misc_Pictographs"),
    c(0x1F578, None, "SPIDER WEB", 0x00, "Misc_Pictographs"),
    c(0x1F579, None, "JOYSTICK", 0x00, "Misc_Pictographs"),
    c(0x1F57A, None, "MAN DANCING", 0x00, "Misc_Pictographs"),
    c(0x1F57B, None, "LEFT HAND TELEPHONE RECEIVER", 0x00, "Misc_Pictographs"),
    c(0x1F57C, None, "TELEPHONE RECEIVER WITH PAGE", 0x00, "Misc_Pictographs"),
    c(0x1F57D, None, "RIGHT HAND TELEPHONE RECEIVER", 0x00, "Misc_Pictographs"),
    c(0x1F57E, None, "WHITE TOUCHTONE TELEPHONE", 0x00, "Misc_Pictographs"),
    c(0x1F57F, None, "BLACK TOUCHTONE TELEPHONE", 0x00, "Misc_Pictographs"),
    c(0x1F580, None, "TELEPHONE ON TOP OF MODEM", 0x00, "Misc_Pictographs"),
    c(0x1F581, None, "CLAMSHELL MOBILE PHONE", 0x00, "Misc_Pictographs"),
    c(0x1F582, None, "BACK OF ENVELOPE", 0x00, "Misc_Pictographs"),
    c(0x1F583, None, "STAMPED ENVELOPE", 0x00, "Misc_Pictographs"),
    c(0x1F584, None, "ENVELOPE WITH LIGHTNING", 0x00, "Misc_Pictographs"),
    c(0x1F585, None, "FLYING ENVELOPE", 0x00, "Misc_Pictographs"),
    c(0x1F586, None, "PEN OVER STAMPED ENVELOPE", 0x00, "Misc_Pictographs"),
    c(0x1F587, None, "LINKED PAPERCLIPS", 0x00, "Misc_Pictographs"),
    c(0x1F588, None, "BLACK PUSHPIN", 0x00, "Misc_Pictographs"),
    c(0x1F589, None, "LOWER LEFT PENCIL", 0x00, "Misc_Pictographs"),
    c(0x1F58A, None, "LOWER LEFT BALLPOINT PEN", 0x00, "Misc_Pictographs"),
    c(0x1F58B, None, "LOWER LEFT FOUNTAIN PEN", 0x00, "Misc_Pictographs"),
    c(0x1F58C, None, "LOWER LEFT PAINTBRUSH", 0x00, "Misc_Pictographs"),
    c(0x1F58D, None, "LOWER LEFT CRAYON", 0x00, "Misc_Pictographs"),
    c(0x1F58E, None, "LEFT WRITING HAND", 0x00, "Misc_Pictographs"),
    c(0x1F58F, None, "TURNED OK HAND SIGN", 0x00, "Misc_Pictographs"),
    c(0x1F590, None, "RAISED HAND WITH FINGERS SPLAYED", 0x00, "Misc_Pictographs"),
    c(0x1F591, None, "REVERSED RAISED HAND WITH FINGERS SPLAYED", 0x00, "Misc_Pictographs"),
    c(0x1F592, None, "REVERSED THUMBS UP SIGN", 0x00, "Misc_Pictographs"),
    c(0x1F593, None, "REVERSED THUMBS DOWN SIGN", 0x00, "Misc_Pictographs"),
    c(0x1F594, None, "REVERSED VICTORY HAND", 0x00, "Misc_Pictographs"),
    c(0x1F595, None, "REVERSED HAND WITH MIDDLE FINGER EXTENDED", 0x00, "Misc_Pictographs"),
    c(0x1F596, None, "RAISED HAND WITH PART BETWEEN MIDDLE AND RING FINGERS", 0x00, "Misc_Pictographs"),
    c(0x1F597, None, "WHITE DOWN POINTING LEFT HAND INDEX", 0x00, "Misc_Pictographs"),
    c(0x1F598, None, "SIDEWAYS WHITE LEFT POINTING INDEX", 0x00, "Misc_Pictographs"),
    c(0x1F599, None, "SIDEWAYS WHITE RIGHT POINTING INDEX", 0x00, "Misc_Pictographs"),
    c(0x1F59A, None, "SIDEWAYS BLACK LEFT POINTING INDEX", 0x00, "Misc_Pictographs"),
    c(0x1F59B, None, "SIDEWAYS BLACK RIGHT POINTING INDEX", 0x00, "Misc_Pictographs"),
    c(0x1F59C, None, "BLACK LEFT POINTING BACKHAND INDEX", 0x00, "Misc_Pictographs"),
    c(0x1F59D, None, "BLACK RIGHT POINTING BACKHAND INDEX", 0x00, "Misc_Pictographs"),
    c(0x1F59E, None, "SIDEWAYS WHITE UP POINTING INDEX", 0x00, "Misc_Pictographs"),
    c(0x1F59F, None, "SIDEWAYS WHITE DOWN POINTING INDEX", 0x00, "Misc_Pictographs"),
    c(0x1F5A0, None, "SIDEWAYS BLACK UP POINTING INDEX", 0x00, "Misc_Pictographs"),
    c(0x1F5A1, None, "SIDEWAYS BLACK DOWN POINTING INDEX", 0x00, "Misc_Pictographs"),
    c(0x1F5A2, None, "BLACK UP POINTING BACKHAND INDEX", 0x00, "Misc_Pictographs"),
    c(0x1F5A3, None, "BLACK DOWN POINTING BACKHAND INDEX", 0x00, "Misc_Pictographs"),
    c(0x1F5A4, None, "BLACK HEART", 0x00, "Misc_Pictographs"),
    c(0x1F5A5, None, "DESKTOP COMPUTER", 0x00, "Misc_Pictographs"),
    c(0x1F5A6, None, "KEYBOARD AND MOUSE", 0x00, "Misc_Pictographs"),
    c(0x1F5A7, None, "THREE NETWORKED COMPUTERS", 0x00, "Misc_Pictographs"),
    c(0x1F5A8, None, "PRINTER", 0x00, "Misc_Pictographs"),
    c(0x1F5A9, None, "POCKET CALCULATOR", 0x00, "Misc_Pictographs"),
    c(0x1F5AA, None, "BLACK HARD SHELL FLOPPY DISK", 0x00, "Misc_Pictographs"),
    c(0x1F5AB, None, "WHITE HARD SHELL FLOPPY DISK", 0x00, "Misc_Pictographs"),
    c(0x1F5AC, None, "SOFT SHELL FLOPPY DISK", 0x00, "Misc_Pictographs"),
    c(0x1F5AD, None, "TAPE CARTRIDGE", 0x00, "Misc_Pictographs"),
    c(0x1F5AE, None, "WIRED KEYBOARD", 0x00, "Misc_Pictographs"),
    c(0x1F5AF, None, "ONE BUTTON MOUSE", 0x00, "Misc_Pictographs"),
    c(0x1F5B0, None, "TWO BUTTON MOUSE", 0x00, "Misc_Pictographs"),
    c(0x1F5B1, None, "THREE BUTTON MOUSE", 0x00, "Misc_Pictographs"),
    c(0x1F5B2, None, "TRACKBALL", 0x00, "Misc_Pictographs"),
    c(0x1F5B3, None, "OLD PERSONAL COMPUTER", 0x00, "Misc_Pictographs"),
    c(0x1F5B4, None, "HARD DISK", 0x00, "Misc_Pictographs"),
    c(0x1F5B5, None, "SCREEN", 0x00, "Misc_Pictographs"),
    c(0x1F5B6, None, "PRINTER ICON", 0x00, "Misc_Pictographs"),
    c(0x1F5B7, None, "FAX ICON", 0x00, "Misc_Pictographs"),
    c(0x1F5B8, None, "OPTICAL DISC ICON", 0x00, "Misc_Pictographs"),
    c(0x1F5B9, None, "DOCUMENT WITH TEXT", 0x00, "Misc_Pictographs"),
    c(0x1F5BA, None, "DOCUMENT WITH TEXT AND PICTURE", 0x00, "Misc_Pictographs"),
    c(0x1F5BB, None, "DOCUMENT WITH PICTURE", 0x00, "Misc_Pictographs"),
    c(0x1F5BC, None, "FRAME WITH PICTURE", 0x00, "Misc_Pictographs"),
    c(0x1F5BD, None, "FRAME WITH TILES", 0x00, "Misc_Pictographs"),
    c(0x1F5BE, None, "FRAME WITH AN X", 0x00, "Misc_Pictographs"),
    c(0x1F5BF, None, "BLACK FOLDER", 0x00, "Misc_Pictographs"),
    c(0x1F5C0, None, "FOLDER", 0x00, "Misc_Pictographs"),
    c(0x1F5C1, None, "OPEN FOLDER", 0x00, "Misc_Pictographs"),
    c(0x1F5C2, None, "CARD INDEX DIVIDERS", 0x00, "Misc_Pictographs"),
    c(0x1F5C3, None, "CARD FILE BOX", 0x00, "Misc_Pictographs"),
    c(0x1F5C4, None, "FILE CABINET", 0x00, "Misc_Pictographs"),
    c(0x1F5C5, None, "EMPTY NOTE", 0x00, "Misc_Pictographs"),
    c(0x1F5C6, None, "EMPTY NOTE PAGE", 0x00, "Misc_Pictographs"),
    c(0x1F5C7, None, "EMPTY NOTE PAD", 0x00, "Misc_Pictographs"),
    c(0x1F5C8, None, "NOTE", 0x00, "Misc_Pictographs"),
    c(0x1F5C9, None, "NOTE PAGE", 0x00, "Misc_Pictographs"),
    c(0x1F5CA, None, "NOTE PAD", 0x00, "Misc_Pictographs"),
    c(0x1F5CB, None, "EMPTY DOCUMENT", 0x00, "Misc_Pictographs"),
    c(0x1F5CC, None, "EMPTY PAGE", 0x00, "Misc_Pictographs"),
    c(0x1F5CD, None, "EMPTY PAGES", 0x00, "Misc_Pictographs"),
    c(0x1F5CE, None, "DOCUMENT", 0x00, "Misc_Pictographs"),
    c(0x1F5CF, None, "PAGE", 0x00, "Misc_Pictographs"),
    c(0x1F5D0, None, "PAGES", 0x00, "Misc_Pictographs"),
    c(0x1F5D1, None, "WASTEBASKET", 0x00, "Misc_Pictographs"),
    c(0x1F5D2, None, "SPIRAL NOTE PAD", 0x00, "Misc_Pictographs"),
    c(0x1F5D3, None, "SPIRAL CALENDAR PAD", 0x00, "Misc_Pictographs"),
    c(0x1F5D4, None, "DESKTOP WINDOW", 0x00, "Misc_Pictographs"),
    c(0x1F5D5, None, "MINIMIZE", 0x00, "Misc_Pictographs"),
    c(0x1F5D6, None, "MAXIMIZE", 0x00, "Misc_Pictographs"),
    c(0x1F5D7, None, "OVERLAP", 0x00, "Misc_Pictographs"),
    c(0x1F5D8, None, "CLOCKWISE RIGHT AND LEFT SEMICIRCLE ARROWS", 0x00, "Misc_Pictographs"),
    c(0x1F5D9, None, "CANCELLATION X", 0x00, "Misc_Pictographs"),
    c(0x1F5DA, None, "INCREASE FONT SIZE SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F5DB, None, "DECREASE FONT SIZE SYMBOL", 0x00, "Misc_Pictographs"),
    c(0x1F5DC, None, "COMPRESSION", 0x00, "Misc_Pictographs"),
    c(0x1F5DD, None, "OLD KEY", 0x00, "Misc_Pictographs"),
    c(0x1F5DE, None, "ROLLED-UP NEWSPAPER", 0x00, "Misc_Pictographs"),
    c(0x1F5DF, None, "PAGE WITH CIRCLED TEXT", 0x00, "Misc_Pictographs"),
    c(0x1F5E0, None, "STOCK CHART", 0x00, "Misc_Pictographs"),
    c(0x1F5E1, None, "DAGGER KNIFE", 0x00, "Misc_Pictographs"),
    c(0x1F5E2, None, "LIPS", 0x00, "Misc_Pictographs"),
    c(0x1F5E3, None, "SPEAKING HEAD IN SILHOUETTE", 0x00, "Misc_Pictographs"),
    c(0x1F5E4, None, "THREE RAYS ABOVE", 0x00, "Misc_Pictographs"),
    c(0x1F5E5, None, "THREE RAYS BELOW", 0x00, "Misc_Pictographs"),
    c(0x1F5E6, None, "THREE RAYS LEFT", 0x00, "Misc_Pictographs"),
    c(0x1F5E7, None, "THREE RAYS RIGHT", 0x00, "Misc_Pictographs"),
    c(0x1F5E8, None, "LEFT SPEECH BUBBLE", 0x00, "Misc_Pictographs"),
    c(0x1F5E9, None, "RIGHT SPEECH BUBBLE", 0x00, "Misc_Pictographs"),
    c(0x1F5EA, None, "TWO SPEECH BUBBLES", 0x00, "Misc_Pictographs"),
    c(0x1F5EB, None, "THREE SPEECH BUBBLES", 0x00, "Misc_Pictographs"),
    c(0x1F5EC, None, "LEFT THOUGHT BUBBLE", 0x00, "Misc_Pictographs"),
    c(0x1F5ED, None, "RIGHT THOUGHT BUBBLE", 0x00, "Misc_Pictographs"),
    c(0x1F5EE, None, "LEFT ANGER BUBBLE", 0x00, "Misc_Pictographs"),
    c(0x1F5EF, None, "RIGHT ANGER BUBBLE", 0x00, "Misc_Pictographs"),
    c(0x1F5F0, None, "MOOD BUBBLE", 0x00, "Misc_Pictographs"),
    c(0x1F5F1, None, "LIGHTNING MOOD BUBBLE", 0x00, "Misc_Pictographs"),
    c(0x1F5F2, None, "LIGHTNING MOOD", 0x00, "Misc_Pictographs"),
    c(0x1F5F3, None, "BALLOT BOX WITH BALLOT", 0x00, "Misc_Pictographs"),
    c(0x1F5F4, None, "BALLOT SCRIPT X", 0x00, "Misc_Pictographs"),
    c(0x1F5F5, None, "BALLOT BOX WITH SCRIPT X", 0x00, "Misc_Pictographs"),
    c(0x1F5F6, None, "BALLOT BOLD SCRIPT X", 0x00, "Misc_Pictographs"),
    c(0x1F5F7, None, "BALLOT BOX WITH BOLD SCRIPT X", 0x00, "Misc_Pictographs"),
    c(0x1F5F8, None, "LIGHT CHECK MARK", 0x00, "Misc_Pictographs"),
    c(0x1F5F9, None, "BALLOT BOX WITH BOLD CHECK", 0x00, "Misc_Pictographs"),
    c(0x1F5FA, None, "WORLD MAP", 0x00, "Misc_Pictographs"),
    c(0x1F5FB, None, "MOUNT FUJI", 0x00, "Misc_Pictographs"),
    c(0x1F5FC, None, "TOKYO TOWER", 0x00, "Misc_Pictographs"),
    c(0x1F5FD, None, "STATUE OF LIBERTY", 0x00, "Misc_Pictographs"),
    c(0x1F5FE, None, "SILHOUETTE OF JAPAN", 0x00, "Misc_Pictographs"),
    c(0x1F5FF, None, "MOYAI", 0x00, "Misc_Pictographs"),
    c(0x1F600, None, "GRINNING FACE", 0x00, "Emoticons"),
    c(0x1F601, None, "GRINNING FACE WITH SMILING EYES", 0x00, "Emoticons"),
    c(0x1F602, None, "FACE WITH TEARS OF JOY", 0x00, "Emoticons"),
    c(0x1F603, None, "SMILING FACE WITH OPEN MOUTH", 0x00, "Emoticons"),
    c(0x1F604, None, "SMILING FACE WITH OPEN MOUTH AND SMILING EYES", 0x00, "Emoticons"),
    c(0x1F605, None, "SMILING FACE WITH OPEN MOUTH AND COLD SWEAT", 0x00, "Emoticons"),
    c(0x1F606, None, "SMILING FACE WITH OPEN MOUTH AND TIGHTLY-CLOSED EYES", 0x00, "Emoticons"),
    c(0x1F607, None, "SMILING FACE WITH HALO", 0x00, "Emoticons"),
    c(0x1F608, None, "SMILING FACE WITH HORNS", 0x00, "Emoticons"),
    c(0x1F609, None, "WINKING FACE", 0x00, "Emoticons"),
    c(0x1F60A, None, "SMILING FACE WITH SMILING EYES", 0x00, "Emoticons"),
    c(0x1F60B, None, "FACE SAVOURING DELICIOUS FOOD", 0x00, "Emoticons"),
    c(0x1F60C, None, "RELIEVED FACE", 0x00, "Emoticons"),
    c(0x1F60D, None, "SMILING FACE WITH HEART-SHAPED EYES", 0x00, "Emoticons"),
    c(0x1F60E, None, "SMILING FACE WITH SUNGLASSES", 0x00, "Emoticons"),
    c(0x1F60F, None, "SMIRKING FACE", 0x00, "Emoticons"),
    c(0x1F610, None, "NEUTRAL FACE", 0x00, "Emoticons"),
    c(0x1F611, None, "EXPRESSIONLESS FACE", 0x00, "Emoticons"),
    c(0x1F612, None, "UNAMUSED FACE", 0x00, "Emoticons"),
    c(0x1F613, None, "FACE WITH COLD SWEAT", 0x00, "Emoticons"),
    c(0x1F614, None, "PENSIVE FACE", 0x00, "Emoticons"),
    c(0x1F615, None, "CONFUSED FACE", 0x00, "Emoticons"),
    c(0x1F616, None, "CONFOUNDED FACE", 0x00, "Emoticons"),
    c(0x1F617, None, "KISSING FACE", 0x00, "Emoticons"),
    c(0x1F618, None, "FACE THROWING A KISS", 0x00, "Emoticons"),
    c(0x1F619, None, "KISSING FACE WITH SMILING EYES", 0x00, "Emoticons"),
    c(0x1F61A, None, "KISSING FACE WITH CLOSED EYES", 0x00, "Emoticons"),
    c(0x1F61B, None, "FACE WITH STUCK-OUT TONGUE", 0x00, "Emoticons"),
    c(0x1F61C, None, "FACE WITH STUCK-OUT TONGUE AND WINKING EYE", 0x00, "Emoticons"),
    c(0x1F61D, None, "FACE WITH STUCK-OUT TONGUE AND TIGHTLY-CLOSED EYES", 0x00, "Emoticons"),
    c(0x1F61E, None, "DISAPPOINTED FACE", 0x00, "Emoticons"),
    c(0x1F61F, None, "WORRIED FACE", 0x00, "Emoticons"),
    c(0x1F620, None, "ANGRY FACE", 0x00, "Emoticons"),
    c(0x1F621, None, "POUTING FACE", 0x00, "Emoticons"),
    c(0x1F622, None, "CRYING FACE", 0x00, "Emoticons"),
    c(0x1F623, None, "PERSEVERING FACE", 0x00, "Emoticons"),
    c(0x1F624, None, "FACE WITH LOOK OF TRIUMPH", 0x00, "Emoticons"),
    c(0x1F625, None, "DISAPPOINTED BUT RELIEVED FACE", 0x00, "Emoticons"),
    c(0x1F626, None, "FROWNING FACE WITH OPEN MOUTH", 0x00, "Emoticons"),
    c(0x1F627, None, "ANGUISHED FACE", 0x00, "Emoticons"),
    c(0x1F628, None, "FEARFUL FACE", 0x00, "Emoticons"),
    c(0x1F629, None, "WEARY FACE", 0x00, "Emoticons"),
    c(0x1F62A, None, "SLEEPY FACE", 0x00, "Emoticons"),
    c(0x1F62B, None, "TIRED FACE", 0x00, "Emoticons"),
    c(0x1F62C, None, "GRIMACING FACE", 0x00, "Emoticons"),
    c(0x1F62D, None, "LOUDLY CRYING FACE", 0x00, "Emoticons"),
    c(0x1F62E, None, "FACE WITH OPEN MOUTH", 0x00, "Emoticons"),
    c(0x1F62F, None, "HUSHED FACE", 0x00, "Emoticons"),
    c(0x1F630, None, "FACE WITH OPEN MOUTH AND COLD SWEAT", 0x00, "Emoticons"),
    c(0x1F631, None, "FACE SCREAMING IN FEAR", 0x00, "Emoticons"),
    c(0x1F632, None, "ASTONISHED FACE", 0x00, "Emoticons"),
    c(0x1F633, None, "FLUSHED FACE", 0x00, "Emoticons"),
    c(0x1F634, None, "SLEEPING FACE", 0x00, "Emoticons"),
    c(0x1F635, None, "DIZZY FACE", 0x00, "Emoticons"),
    c(0x1F636, None, "FACE WITHOUT MOUTH", 0x00, "Emoticons"),
    c(0x1F637, None, "FACE WITH MEDICAL MASK", 0x00, "Emoticons"),
    c(0x1F638, None, "GRINNING CAT FACE WITH SMILING EYES", 0x00, "Emoticons"),
    c(0x1F639, None, "CAT FACE WITH TEARS OF JOY", 0x00, "Emoticons"),
    c(0x1F63A, None, "SMILING CAT FACE WITH OPEN MOUTH", 0x00, "Emoticons"),
    c(0x1F63B, None, "SMILING CAT FACE WITH HEART-SHAPED EYES", 0x00, "Emoticons"),
    c(0x1F63C, None, "CAT FACE WITH WRY SMILE", 0x00, "Emoticons"),
    c(0x1F63D, None, "KISSING CAT FACE WITH CLOSED EYES", 0x00, "Emoticons"),
    c(0x1F63E, None, "POUTING CAT FACE", 0x00, "Emoticons"),
    c(0x1F63F, None, "CRYING CAT FACE", 0x00, "Emoticons"),
    c(0x1F640, None, "WEARY CAT FACE", 0x00, "Emoticons"),
    c(0x1F641, None, "SLIGHTLY FROWNING FACE", 0x00, "Emoticons"),
    c(0x1F642, None, "SLIGHTLY SMILING FACE", 0x00, "Emoticons"),
    c(0x1F643, None, "UPSIDE-DOWN FACE", 0x00, "Emoticons"),
    c(0x1F644, None, "FACE WITH ROLLING EYES", 0x00, "Emoticons"),
    c(0x1F645, None, "FACE WITH NO GOOD GESTURE", 0x00, "Emoticons"),
    c(0x1F646, None, "FACE WITH OK GESTURE", 0x00, "Emoticons"),
    c(0x1F647, None, "PERSON BOWING DEEPLY", 0x00, "Emoticons"),
    c(0x1F648, None, "SEE-NO-EVIL MONKEY", 0x00, "Emoticons"),
    c(0x1F649, None, "HEAR-NO-EVIL MONKEY", 0x00, "Emoticons"),
    c(0x1F64A, None, "SPEAK-NO-EVIL MONKEY", 0x00, "Emoticons"),
    c(0x1F64B, None, "HAPPY PERSON RAISING ONE HAND", 0x00, "Emoticons"),
    c(0x1F64C, None, "PERSON RAISING BOTH HANDS IN CELEBRATION", 0x00, "Emoticons"),
    c(0x1F64D, None, "PERSON FROWNING", 0x00, "Emoticons"),
    c(0x1F64E, None, "PERSON WITH POUTING FACE", 0x00, "Emoticons"),
    c(0x1F64F, None, "PERSON WITH FOLDED HANDS", 0x00, "Emoticons"),
    c(0x1F650, None, "NORTH WEST POINTING LEAF", 0x00, "Ornamental_Dingbats"),
    c(0x1F651, None, "SOUTH WEST POINTING LEAF", 0x00, "Ornamental_Dingbats"),
    c(0x1F652, None, "NORTH EAST POINTING LEAF", 0x00, "Ornamental_Dingbats"),
    c(0x1F653, None, "SOUTH EAST POINTING LEAF", 0x00, "Ornamental_Dingbats"),
    c(0x1F654, None, "TURNED NORTH WEST POINTING LEAF", 0x00, "Ornamental_Dingbats"),
    c(0x1F655, None, "TURNED SOUTH WEST POINTING LEAF", 0x00, "Ornamental_Dingbats"),
    c(0x1F656, None, "TURNED NORTH EAST POINTING LEAF", 0x00, "Ornamental_Dingbats"),
    c(0x1F657, None, "TURNED SOUTH EAST POINTING LEAF", 0x00, "Ornamental_Dingbats"),
    c(0x1F658, None, "NORTH WEST POINTING VINE LEAF", 0x00, "Ornamental_Dingbats"),
    c(0x1F659, None, "SOUTH WEST POINTING VINE LEAF", 0x00, "Ornamental_Dingbats"),
    c(0x1F65A, None, "NORTH EAST POINTING VINE LEAF", 0x00, "Ornamental_Dingbats"),
    c(0x1F65B, None, "SOUTH EAST POINTING VINE LEAF", 0x00, "Ornamental_Dingbats"),
    c(0x1F65C, None, "HEAVY NORTH WEST POINTING VINE LEAF", 0x00, "Ornamental_Dingbats"),
    c(0x1F65D, None, "HEAVY SOUTH WEST POINTING VINE LEAF", 0x00, "Ornamental_Dingbats"),
    c(0x1F65E, None, "HEAVY NORTH EAST POINTING VINE LEAF", 0x00, "Ornamental_Dingbats"),
    c(0x1F65F, None, "HEAVY SOUTH EAST POINTING VINE LEAF", 0x00, "Ornamental_Dingbats"),
    c(0x1F660, None, "NORTH WEST POINTING BUD", 0x00, "Ornamental_Dingbats"),
    c(0x1F661, None, "SOUTH WEST POINTING BUD", 0x00, "Ornamental_Dingbats"),
    c(0x1F662, None, "NORTH EAST POINTING BUD", 0x00, "Ornamental_Dingbats"),
    c(0x1F663, None, "SOUTH EAST POINTING BUD", 0x00, "Ornamental_Dingbats"),
    c(0x1F664, None, "HEAVY NORTH WEST POINTING BUD", 0x00, "Ornamental_Dingbats"),
    c(0x1F665, None, "HEAVY SOUTH WEST POINTING BUD", 0x00, "Ornamental_Dingbats"),
    c(0x1F666, None, "HEAVY NORTH EAST POINTING BUD", 0x00, "Ornamental_Dingbats"),
    c(0x1F667, None, "HEAVY SOUTH EAST POINTING BUD", 0x00, "Ornamental_Dingbats"),
    c(0x1F668, None, "HOLLOW QUILT SQUARE ORNAMENT", 0x00, "Ornamental_Dingbats"),
    c(0x1F669, None, "HOLLOW QUILT SQUARE ORNAMENT IN BLACK SQUARE", 0x00, "Ornamental_Dingbats"),
    c(0x1F66A, None, "SOLID QUILT SQUARE ORNAMENT", 0x00, "Ornamental_Dingbats"),
    c(0x1F66B, None, "SOLID QUILT SQUARE ORNAMENT IN BLACK SQUARE", 0x00, "Ornamental_Dingbats"),
    c(0x1F66C, None, "LEFTWARDS ROCKET", 0x00, "Ornamental_Dingbats"),
    c(0x1F66D, None, "UPWARDS ROCKET", 0x00, "Ornamental_Dingbats"),
    c(0x1F66E, None, "RIGHTWARDS ROCKET", 0x00, "Ornamental_Dingbats"),
    c(0x1F66F, None, "DOWNWARDS ROCKET", 0x00, "Ornamental_Dingbats"),
    c(0x1F670, None, "SCRIPT LIGATURE ET ORNAMENT", 0x00, "Ornamental_Dingbats"),
    c(0x1F671, None, "HEAVY SCRIPT LIGATURE ET ORNAMENT", 0x00, "Ornamental_Dingbats"),
    c(0x1F672, None, "LIGATURE OPEN ET ORNAMENT", 0x00, "Ornamental_Dingbats"),
    c(0x1F673, None, "HEAVY LIGATURE OPEN ET ORNAMENT", 0x00, "Ornamental_Dingbats"),
    c(0x1F674, None, "HEAVY AMPERSAND ORNAMENT", 0x00, "Ornamental_Dingbats"),
    c(0x1F675, None, "SWASH AMPERSAND ORNAMENT", 0x00, "Ornamental_Dingbats"),
    c(0x1F676, None, "SANS-SERIF HEAVY DOUBLE TURNED COMMA QUOTATION MARK ORNAMENT", 0x00, "Ornamental_Dingbats"),
    c(0x1F677, None, "SANS-SERIF HEAVY DOUBLE COMMA QUOTATION MARK ORNAMENT", 0x00, "Ornamental_Dingbats"),
    c(0x1F678, None, "SANS-SERIF HEAVY LOW DOUBLE COMMA QUOTATION MARK ORNAMENT", 0x00, "Ornamental_Dingbats"),
    c(0x1F679, None, "HEAVY INTERROBANG ORNAMENT", 0x00, "Ornamental_Dingbats"),
    c(0x1F67A, None, "SANS-SERIF INTERROBANG ORNAMENT", 0x00, "Ornamental_Dingbats"),
    c(0x1F67B, None, "HEAVY SANS-SERIF INTERROBANG ORNAMENT", 0x00, "Ornamental_Dingbats"),
    c(0x1F67C, None, "VERY HEAVY SOLIDUS", 0x00, "Ornamental_Dingbats"),
    c(0x1F67D, None, "VERY HEAVY REVERSE SOLIDUS", 0x00, "Ornamental_Dingbats"),
    c(0x1F67E, None, "CHECKER BOARD", 0x00, "Ornamental_Dingbats"),
    c(0x1F67F, None, "REVERSE CHECKER BOARD", 0x00, "Ornamental_Dingbats"),
    c(0x1F680, None, "ROCKET", 0x00, "Transport_And_Map"),
    c(0x1F681, None, "HELICOPTER", 0x00, "Transport_And_Map"),
    c(0x1F682, None, "STEAM LOCOMOTIVE", 0x00, "Transport_And_Map"),
    c(0x1F683, None, "RAILWAY CAR", 0x00, "Transport_And_Map"),
    c(0x1F684, None, "HIGH-SPEED TRAIN", 0x00, "Transport_And_Map"),
    c(0x1F685, None, "HIGH-SPEED TRAIN WITH BULLET NOSE", 0x00, "Transport_And_Map"),
    c(0x1F686, None, "TRAIN", 0x00, "Transport_And_Map"),
    c(0x1F687, None, "METRO", 0x00, "Transport_And_Map"),
    c(0x1F688, None, "LIGHT RAIL", 0x00, "Transport_And_Map"),
    c(0x1F689, None, "STATION", 0x00, "Transport_And_Map"),
    c(0x1F68A, None, "TRAM", 0x00, "Transport_And_Map"),
    c(0x1F68B, None, "TRAM CAR", 0x00, "Transport_And_Map"),
    c(0x1F68C, None, "BUS", 0x00, "Transport_And_Map"),
    c(0x1F68D, None, "ONCOMING BUS", 0x00, "Transport_And_Map"),
    c(0x1F68E, None, "TROLLEYBUS", 0x00, "Transport_And_Map"),
    c(0x1F68F, None, "BUS STOP", 0x00, "Transport_And_Map"),
    c(0x1F690, None, "MINIBUS", 0x00, "Transport_And_Map"),
    c(0x1F691, None, "AMBULANCE", 0x00, "Transport_And_Map"),
    c(0x1F692, None, "FIRE ENGINE", 0x00, "Transport_And_Map"),
    c(0x1F693, None, "POLICE CAR", 0x00, "Transport_And_Map"),
    c(0x1F694, None, "ONCOMING POLICE CAR", 0x00, "Transport_And_Map"),
    c(0x1F695, None, "TAXI", 0x00, "Transport_And_Map"),
    c(0x1F696, None, "ONCOMING TAXI", 0x00, "Transport_And_Map"),
    c(0x1F697, None, "AUTOMOBILE", 0x00, "Transport_And_Map"),
    c(0x1F698, None, "ONCOMING AUTOMOBILE", 0x00, "Transport_And_Map"),
    c(0x1F699, None, "RECREATIONAL VEHICLE", 0x00, "Transport_And_Map"),
    c(0x1F69A, None, "DELIVERY TRUCK", 0x00, "Transport_And_Map"),
    c(0x1F69B, None, "ARTICULATED LORRY", 0x00, "Transport_And_Map"),
    c(0x1F69C, None, "TRACTOR", 0x00, "Transport_And_Map"),
    c(0x1F69D, None, "MONORAIL", 0x00, "Transport_And_Map"),
    c(0x1F69E, None, "MOUNTAIN RAILWAY", 0x00, "Transport_And_Map"),
    c(0x1F69F, None, "SUSPENSION RAILWAY", 0x00, "Transport_And_Map"),
    c(0x1F6A0, None, "MOUNTAIN CABLEWAY", 0x00, "Transport_And_Map"),
    c(0x1F6A1, None, "AERIAL TRAMWAY", 0x00, "Transport_And_Map"),
    c(0x1F6A2, None, "SHIP", 0x00, "Transport_And_Map"),
    c(0x1F6A3, None, "ROWBOAT", 0x00, "Transport_And_Map"),
    c(0x1F6A4, None, "SPEEDBOAT", 0x00, "Transport_And_Map"),
    c(0x1F6A5, None, "HORIZONTAL TRAFFIC LIGHT", 0x00, "Transport_And_Map"),
    c(0x1F6A6, None, "VERTICAL TRAFFIC LIGHT", 0x00, "Transport_And_Map"),
    c(0x1F6A7, None, "CONSTRUCTION SIGN", 0x00, "Transport_And_Map"),
    c(0x1F6A8, None, "POLICE CARS REVOLVING LIGHT", 0x00, "Transport_And_Map"),
    c(0x1F6A9, None, "TRIANGULAR FLAG ON POST", 0x00, "Transport_And_Map"),
    c(0x1F6AA, None, "DOOR", 0x00, "Transport_And_Map"),
    c(0x1F6AB, None, "NO ENTRY SIGN", 0x00, "Transport_And_Map"),
    c(0x1F6AC, None, "SMOKING SYMBOL", 0x00, "Transport_And_Map"),
    c(0x1F6AD, None, "NO SMOKING SYMBOL", 0x00, "Transport_And_Map"),
    c(0x1F6AE, None, "PUT LITTER IN ITS PLACE SYMBOL", 0x00, "Transport_And_Map"),
    c(0x1F6AF, None, "DO NOT LITTER SYMBOL", 0x00, "Transport_And_Map"),
    c(0x1F6B0, None, "POTABLE WATER SYMBOL", 0x00, "Transport_And_Map"),
    c(0x1F6B1, None, "NON-POTABLE WATER SYMBOL", 0x00, "Transport_And_Map"),
    c(0x1F6B2, None, "BICYCLE", 0x00, "Transport_And_Map"),
    c(0x1F6B3, None, "NO BICYCLES", 0x00, "Transport_And_Map"),
    c(0x1F6B4, None, "BICYCLIST", 0x00, "Transport_And_Map"),
    c(0x1F6B5, None, "MOUNTAIN BICYCLIST", 0x00, "Transport_And_Map"),
    c(0x1F6B6, None, "PEDESTRIAN", 0x00, "Transport_And_Map"),
    c(0x1F6B7, None, "NO PEDESTRIANS", 0x00, "Transport_And_Map"),
    c(0x1F6B8, None, "CHILDREN CROSSING", 0x00, "Transport_And_Map"),
    c(0x1F6B9, None, "MENS SYMBOL", 0x00, "Transport_And_Map"),
    c(0x1F6BA, None, "WOMENS SYMBOL", 0x00, "Transport_And_Map"),
    c(0x1F6BB, None, "RESTROOM", 0x00, "Transport_And_Map"),
    c(0x1F6BC, None, "BABY SYMBOL", 0x00, "Transport_And_Map"),
    c(0x1F6BD, None, "TOILET", 0x00, "Transport_And_Map"),
    c(0x1F6BE, None, "WATER CLOSET", 0x00, "Transport_And_Map"),
    c(0x1F6BF, None, "SHOWER", 0x00, "Transport_And_Map"),
    c(0x1F6C0, None, "BATH", 0x00, "Transport_And_Map"),
    c(0x1F6C1, None, "BATHTUB", 0x00, "Transport_And_Map"),
    c(0x1F6C2, None, "PASSPORT CONTROL", 0x00, "Transport_And_Map"),
    c(0x1F6C3, None, "CUSTOMS", 0x00, "Transport_And_Map"),
    c(0x1F6C4, None, "BAGGAGE CLAIM", 0x00, "Transport_And_Map"),
    c(0x1F6C5, None, "LEFT LUGGAGE", 0x00, "Transport_And_Map"),
    c(0x1F6C6, None, "TRIANGLE WITH ROUNDED CORNERS", 0x00, "Transport_And_Map"),
    c(0x1F6C7, None, "PROHIBITED SIGN", 0x00, "Transport_And_Map"),
    c(0x1F6C8, None, "CIRCLED INFORMATION SOURCE", 0x00, "Transport_And_Map"),
    c(0x1F6C9, None, "BOYS SYMBOL", 0x00, "Transport_And_Map"),
    c(0x1F6CA, None, "GIRLS SYMBOL", 0x00, "Transport_And_Map"),
    c(0x1F6CB, None, "COUCH AND LAMP", 0x00, "Transport_And_Map"),
    c(0x1F6CC, None, "SLEEPING ACCOMMODATION", 0x00, "Transport_And_Map"),
    c(0x1F6CD, None, "SHOPPING BAGS", 0x00, "Transport_And_Map"),
    c(0x1F6CE, None, "BELLHOP BELL", 0x00, "Transport_And_Map"),
    c(0x1F6CF, None, "BED", 0x00, "Transport_And_Map"),
    c(0x1F6D0, None, "PLACE OF WORSHIP", 0x00, "Transport_And_Map"),
    c(0x1F6D1, None, "OCTAGONAL SIGN", 0x00, "Transport_And_Map"),
    c(0x1F6D2, None, "SHOPPING TROLLEY", 0x00, "Transport_And_Map"),
    c(0x1F6D3, None, "STUPA", 0x00, "Transport_And_Map"),
    c(0x1F6D4, None, "PAGODA", 0x00, "Transport_And_Map"),
    c(0x1F6D5, None, "HINDU TEMPLE", 0x00, "Transport_And_Map"),
    c(0x1F6D6, None, "HUT", 0x00, "Transport_And_Map"),
    c(0x1F6D7, None, "ELEVATOR", 0x00, "Transport_And_Map"),
    c(0x1F6DD, None, "PLAYGROUND SLIDE", 0x00, "Transport_And_Map"),
    c(0x1F6DE, None, "WHEEL", 0x00, "Transport_And_Map"),
    c(0x1F6DF, None, "RING BUOY", 0x00, "Transport_And_Map"),
    c(0x1F6E0, None, "HAMMER AND WRENCH", 0x00, "Transport_And_Map"),
    c(0x1F6E1, None, "SHIELD", 0x00, "Transport_And_Map"),
    c(0x1F6E2, None, "OIL DRUM", 0x00, "Transport_And_Map"),
    c(0x1F6E3, None, "MOTORWAY", 0x00, "Transport_And_Map"),
    c(0x1F6E4, None, "RAILWAY TRACK", 0x00, "Transport_And_Map"),
    c(0x1F6E5, None, "MOTOR BOAT", 0x00, "Transport_And_Map"),
    c(0x1F6E6, None, "UP-POINTING MILITARY AIRPLANE", 0x00, "Transport_And_Map"),
    c(0x1F6E7, None, "UP-POINTING AIRPLANE", 0x00, "Transport_And_Map"),
    c(0x1F6E8, None, "UP-POINTING SMALL AIRPLANE", 0x00, "Transport_And_Map"),
    c(0x1F6E9, None, "SMALL AIRPLANE", 0x00, "Transport_And_Map"),
    c(0x1F6EA, None, "NORTHEAST-POINTING AIRPLANE", 0x00, "Transport_And_Map"),
    c(0x1F6EB, None, "AIRPLANE DEPARTURE", 0x00, "Transport_And_Map"),
    c(0x1F6EC, None, "AIRPLANE ARRIVING", 0x00, "Transport_And_Map"),
    c(0x1F6F0, None, "SATELLITE", 0x00, "Transport_And_Map"),
    c(0x1F6F1, None, "ONCOMING FIRE ENGINE", 0x00, "Transport_And_Map"),
    c(0x1F6F2, None, "DIESEL LOCOMOTIVE", 0x00, "Transport_And_Map"),
    c(0x1F6F3, None, "PASSENGER SHIP", 0x00, "Transport_And_Map"),
    c(0x1F6F4, None, "SCOOTER", 0x00, "Transport_And_Map"),
    c(0x1F6F5, None, "MOTOR SCOOTER", 0x00, "Transport_And_Map"),
    c(0x1F6F6, None, "CANOE", 0x00, "Transport_And_Map"),
    c(0x1F6F7, None, "SLED", 0x00, "Transport_And_Map"),
    c(0x1F6F8, None, "FLYING SAUCER", 0x00, "Transport_And_Map"),
    c(0x1F6F9, None, "SKATEBOARD", 0x00, "Transport_And_Map"),
    c(0x1F6FA, None, "AUTO RICKSHAW", 0x00, "Transport_And_Map"),
    c(0x1F6FB, None, "PICKUP TRUCK", 0x00, "Transport_And_Map"),
    c(0x1F6FC, None, "ROLLER SKATE", 0x00, "Transport_And_Map"),
    c(0x1F700, None, "ALCHEMICAL SYMBOL FOR QUINTESSENCE", 0x00, "Alchemical"),
    c(0x1F701, None, "ALCHEMICAL SYMBOL FOR AIR", 0x00, "Alchemical"),
    c(0x1F702, None, "ALCHEMICAL SYMBOL FOR FIRE", 0x00, "Alchemical"),
    c(0x1F703, None, "ALCHEMICAL SYMBOL FOR EARTH", 0x00, "Alchemical"),
    c(0x1F704, None, "ALCHEMICAL SYMBOL FOR WATER", 0x00, "Alchemical"),
    c(0x1F705, None, "ALCHEMICAL SYMBOL FOR AQUAFORTIS", 0x00, "Alchemical"),
    c(0x1F706, None, "ALCHEMICAL SYMBOL FOR AQUA REGIA", 0x00, "Alchemical"),
    c(0x1F707, None, "ALCHEMICAL SYMBOL FOR AQUA REGIA-2", 0x00, "Alchemical"),
    c(0x1F708, None, "ALCHEMICAL SYMBOL FOR AQUA VITAE", 0x00, "Alchemical"),
    c(0x1F709, None, "ALCHEMICAL SYMBOL FOR AQUA VITAE-2", 0x00, "Alchemical"),
    c(0x1F70A, None, "ALCHEMICAL SYMBOL FOR VINEGAR", 0x00, "Alchemical"),
    c(0x1F70B, None, "ALCHEMICAL SYMBOL FOR VINEGAR-2", 0x00, "Alchemical"),
    c(0x1F70C, None, "ALCHEMICAL SYMBOL FOR VINEGAR-3", 0x00, "Alchemical"),
    c(0x1F70D, None, "ALCHEMICAL SYMBOL FOR SULFUR", 0x00, "Alchemical"),
    c(0x1F70E, None, "ALCHEMICAL SYMBOL FOR PHILOSOPHERS SULFUR", 0x00, "Alchemical"),
    c(0x1F70F, None, "ALCHEMICAL SYMBOL FOR BLACK SULFUR", 0x00, "Alchemical"),
    c(0x1F710, None, "ALCHEMICAL SYMBOL FOR MERCURY SUBLIMATE", 0x00, "Alchemical"),
    c(0x1F711, None, "ALCHEMICAL SYMBOL FOR MERCURY SUBLIMATE-2", 0x00, "Alchemical"),
    c(0x1F712, None, "ALCHEMICAL SYMBOL FOR MERCURY SUBLIMATE-3", 0x00, "Alchemical"),
    c(0x1F713, None, "ALCHEMICAL SYMBOL FOR CINNABAR", 0x00, "Alchemical"),
    c(0x1F714, None, "ALCHEMICAL SYMBOL FOR SALT", 0x00, "Alchemical"),
    c(0x1F715, None, "ALCHEMICAL SYMBOL FOR NITRE", 0x00, "Alchemical"),
    c(0x1F716, None, "ALCHEMICAL SYMBOL FOR VITRIOL", 0x00, "Alchemical"),
    c(0x1F717, None, "ALCHEMICAL SYMBOL FOR VITRIOL-2", 0x00, "Alchemical"),
    c(0x1F718, None, "ALCHEMICAL SYMBOL FOR ROCK SALT", 0x00, "Alchemical"),
    c(0x1F719, None, "ALCHEMICAL SYMBOL FOR ROCK SALT-2", 0x00, "Alchemical"),
    c(0x1F71A, None, "ALCHEMICAL SYMBOL FOR GOLD", 0x00, "Alchemical"),
    c(0x1F71B, None, "ALCHEMICAL SYMBOL FOR SILVER", 0x00, "Alchemical"),
    c(0x1F71C, None, "ALCHEMICAL SYMBOL FOR IRON ORE", 0x00, "Alchemical"),
    c(0x1F71D, None, "ALCHEMICAL SYMBOL FOR IRON ORE-2", 0x00, "Alchemical"),
    c(0x1F71E, None, "ALCHEMICAL SYMBOL FOR CROCUS OF IRON", 0x00, "Alchemical"),
    c(0x1F71F, None, "ALCHEMICAL SYMBOL FOR REGULUS OF IRON", 0x00, "Alchemical"),
    c(0x1F720, None, "ALCHEMICAL SYMBOL FOR COPPER ORE", 0x00, "Alchemical"),
    c(0x1F721, None, "ALCHEMICAL SYMBOL FOR IRON-COPPER ORE", 0x00, "Alchemical"),
    c(0x1F722, None, "ALCHEMICAL SYMBOL FOR SUBLIMATE OF COPPER", 0x00, "Alchemical"),
    c(0x1F723, None, "ALCHEMICAL SYMBOL FOR CROCUS OF COPPER", 0x00, "Alchemical"),
    c(0x1F724, None, "ALCHEMICAL SYMBOL FOR CROCUS OF COPPER-2", 0x00, "Alchemical"),
    c(0x1F725, None, "ALCHEMICAL SYMBOL FOR COPPER ANTIMONIATE", 0x00, "Alchemical"),
    c(0x1F726, None, "ALCHEMICAL SYMBOL FOR SALT OF COPPER ANTIMONIATE", 0x00, "Alchemical"),
    c(0x1F727, None, "ALCHEMICAL SYMBOL FOR SUBLIMATE OF SALT OF COPPER", 0x00, "Alchemical"),
    c(0x1F728, None, "ALCHEMICAL SYMBOL FOR VERDIGRIS", 0x00, "Alchemical"),
    c(0x1F729, None, "ALCHEMICAL SYMBOL FOR TIN ORE", 0x00, "Alchemical"),
    c(0x1F72A, None, "ALCHEMICAL SYMBOL FOR LEAD ORE", 0x00, "Alchemical"),
    c(0x1F72B, None, "ALCHEMICAL SYMBOL FOR ANTIMONY ORE", 0x00, "Alchemical"),
    c(0x1F72C, None, "ALCHEMICAL SYMBOL FOR SUBLIMATE OF ANTIMONY", 0x00, "Alchemical"),
    c(0x1F72D, None, "ALCHEMICAL SYMBOL FOR SALT OF ANTIMONY", 0x00, "Alchemical"),
    c(0x1F72E, None, "ALCHEMICAL SYMBOL FOR SUBLIMATE OF SALT OF ANTIMONY", 0x00, "Alchemical"),
    c(0x1F72F, None, "ALCHEMICAL SYMBOL FOR VINEGAR OF ANTIMONY", 0x00, "Alchemical"),
    c(0x1F730, None, "ALCHEMICAL SYMBOL FOR REGULUS OF ANTIMONY", 0x00, "Alchemical"),
    c(0x1F731, None, "ALCHEMICAL SYMBOL FOR REGULUS OF ANTIMONY-2", 0x00, "Alchemical"),
    c(0x1F732, None, "ALCHEMICAL SYMBOL FOR REGULUS", 0x00, "Alchemical"),
    c(0x1F733, None, "ALCHEMICAL SYMBOL FOR REGULUS-2", 0x00, "Alchemical"),
    c(0x1F734, None, "ALCHEMICAL SYMBOL FOR REGULUS-3", 0x00, "Alchemical"),
    c(0x1F735, None, "ALCHEMICAL SYMBOL FOR REGULUS-4", 0x00, "Alchemical"),
    c(0x1F736, None, "ALCHEMICAL SYMBOL FOR ALKALI", 0x00, "Alchemical"),
    c(0x1F737, None, "ALCHEMICAL SYMBOL FOR ALKALI-2", 0x00, "Alchemical"),
    c(0x1F738, None, "ALCHEMICAL SYMBOL FOR MARCASITE", 0x00, "Alchemical"),
    c(0x1F739, None, "ALCHEMICAL SYMBOL FOR SAL-AMMONIAC", 0x00, "Alchemical"),
    c(0x1F73A, None, "ALCHEMICAL SYMBOL FOR ARSENIC", 0x00, "Alchemical"),
    c(0x1F73B, None, "ALCHEMICAL SYMBOL FOR REALGAR", 0x00, "Alchemical"),
    c(0x1F73C, None, "ALCHEMICAL SYMBOL FOR REALGAR-2", 0x00, "Alchemical"),
    c(0x1F73D, None, "ALCHEMICAL SYMBOL FOR AURIPIGMENT", 0x00, "Alchemical"),
    c(0x1F73E, None, "ALCHEMICAL SYMBOL FOR BISMUTH ORE", 0x00, "Alchemical"),
    c(0x1F73F, None, "ALCHEMICAL SYMBOL FOR TARTAR", 0x00, "Alchemical"),
    c(0x1F740, None, "ALCHEMICAL SYMBOL FOR TARTAR-2", 0x00, "Alchemical"),
    c(0x1F741, None, "ALCHEMICAL SYMBOL FOR QUICK LIME", 0x00, "Alchemical"),
    c(0x1F742, None, "ALCHEMICAL SYMBOL FOR BORAX", 0x00, "Alchemical"),
    c(0x1F743, None, "ALCHEMICAL SYMBOL FOR BORAX-2", 0x00, "Alchemical"),
    c(0x1F744, None, "ALCHEMICAL SYMBOL FOR BORAX-3", 0x00, "Alchemical"),
    c(0x1F745, None, "ALCHEMICAL SYMBOL FOR ALUM", 0x00, "Alchemical"),
    c(0x1F746, None, "ALCHEMICAL SYMBOL FOR OIL", 0x00, "Alchemical"),
    c(0x1F747, None, "ALCHEMICAL SYMBOL FOR SPIRIT", 0x00, "Alchemical"),
    c(0x1F748, None, "ALCHEMICAL SYMBOL FOR TINCTURE", 0x00, "Alchemical"),
    c(0x1F749, None, "ALCHEMICAL SYMBOL FOR GUM", 0x00, "Alchemical"),
    c(0x1F74A, None, "ALCHEMICAL SYMBOL FOR WAX", 0x00, "Alchemical"),
    c(0x1F74B, None, "ALCHEMICAL SYMBOL FOR POWDER", 0x00, "Alchemical"),
    c(0x1F74C, None, "ALCHEMICAL SYMBOL FOR CALX", 0x00, "Alchemical"),
    c(0x1F74D, None, "ALCHEMICAL SYMBOL FOR TUTTY", 0x00, "Alchemical"),
    c(0x1F74E, None, "ALCHEMICAL SYMBOL FOR CAPUT MORTUUM", 0x00, "Alchemical"),
    c(0x1F74F, None, "ALCHEMICAL SYMBOL FOR SCEPTER OF JOVE", 0x00, "Alchemical"),
    c(0x1F750, None, "ALCHEMICAL SYMBOL FOR CADUCEUS", 0x00, "Alchemical"),
    c(0x1F751, None, "ALCHEMICAL SYMBOL FOR TRIDENT", 0x00, "Alchemical"),
    c(0x1F752, None, "ALCHEMICAL SYMBOL FOR STARRED TRIDENT", 0x00, "Alchemical"),
    c(0x1F753, None, "ALCHEMICAL SYMBOL FOR LODESTONE", 0x00, "Alchemical"),
    c(0x1F754, None, "ALCHEMICAL SYMBOL FOR SOAP", 0x00, "Alchemical"),
    c(0x1F755, None, "ALCHEMICAL SYMBOL FOR URINE", 0x00, "Alchemical"),
    c(0x1F756, None, "ALCHEMICAL SYMBOL FOR HORSE DUNG", 0x00, "Alchemical"),
    c(0x1F757, None, "ALCHEMICAL SYMBOL FOR ASHES", 0x00, "Alchemical"),
    c(0x1F758, None, "ALCHEMICAL SYMBOL FOR POT ASHES", 0x00, "Alchemical"),
    c(0x1F759, None, "ALCHEMICAL SYMBOL FOR BRICK", 0x00, "Alchemical"),
    c(0x1F75A, None, "ALCHEMICAL SYMBOL FOR POWDERED BRICK", 0x00, "Alchemical"),
    c(0x1F75B, None, "ALCHEMICAL SYMBOL FOR AMALGAM", 0x00, "Alchemical"),
    c(0x1F75C, None, "ALCHEMICAL SYMBOL FOR STRATUM SUPER STRATUM", 0x00, "Alchemical"),
    c(0x1F75D, None, "ALCHEMICAL SYMBOL FOR STRATUM SUPER STRATUM-2", 0x00, "Alchemical"),
    c(0x1F75E, None, "ALCHEMICAL SYMBOL FOR SUBLIMATION", 0x00, "Alchemical"),
    c(0x1F75F, None, "ALCHEMICAL SYMBOL FOR PRECIPITATE", 0x00, "Alchemical"),
    c(0x1F760, None, "ALCHEMICAL SYMBOL FOR DISTILL", 0x00, "Alchemical"),
    c(0x1F761, None, "ALCHEMICAL SYMBOL FOR DISSOLVE", 0x00, "Alchemical"),
    c(0x1F762, None, "ALCHEMICAL SYMBOL FOR DISSOLVE-2", 0x00, "Alchemical"),
    c(0x1F763, None, "ALCHEMICAL SYMBOL FOR PURIFY", 0x00, "Alchemical"),
    c(0x1F764, None, "ALCHEMICAL SYMBOL FOR PUTREFACTION", 0x00, "Alchemical"),
    c(0x1F765, None, "ALCHEMICAL SYMBOL FOR CRUCIBLE", 0x00, "Alchemical"),
    c(0x1F766, None, "ALCHEMICAL SYMBOL FOR CRUCIBLE-2", 0x00, "Alchemical"),
    c(0x1F767, None, "ALCHEMICAL SYMBOL FOR CRUCIBLE-3", 0x00, "Alchemical"),
    c(0x1F768, None, "ALCHEMICAL SYMBOL FOR CRUCIBLE-4", 0x00, "Alchemical"),
    c(0x1F769, None, "ALCHEMICAL SYMBOL FOR CRUCIBLE-5", 0x00, "Alchemical"),
    c(0x1F76A, None, "ALCHEMICAL SYMBOL FOR ALEMBIC", 0x00, "Alchemical"),
    c(0x1F76B, None, "ALCHEMICAL SYMBOL FOR BATH OF MARY", 0x00, "Alchemical"),
    c(0x1F76C, None, "ALCHEMICAL SYMBOL FOR BATH OF VAPOURS", 0x00, "Alchemical"),
    c(0x1F76D, None, "ALCHEMICAL SYMBOL FOR RETORT", 0x00, "Alchemical"),
    c(0x1F76E, None, "ALCHEMICAL SYMBOL FOR HOUR", 0x00, "Alchemical"),
    c(0x1F76F, None, "ALCHEMICAL SYMBOL FOR NIGHT", 0x00, "Alchemical"),
    c(0x1F770, None, "ALCHEMICAL SYMBOL FOR DAY-NIGHT", 0x00, "Alchemical"),
    c(0x1F771, None, "ALCHEMICAL SYMBOL FOR MONTH", 0x00, "Alchemical"),
    c(0x1F772, None, "ALCHEMICAL SYMBOL FOR HALF DRAM", 0x00, "Alchemical"),
    c(0x1F773, None, "ALCHEMICAL SYMBOL FOR HALF OUNCE", 0x00, "Alchemical"),
    c(0x1F780, None, "BLACK LEFT-POINTING ISOSCELES RIGHT TRIANGLE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F781, None, "BLACK UP-POINTING ISOSCELES RIGHT TRIANGLE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F782, None, "BLACK RIGHT-POINTING ISOSCELES RIGHT TRIANGLE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F783, None, "BLACK DOWN-POINTING ISOSCELES RIGHT TRIANGLE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F784, None, "BLACK SLIGHTLY SMALL CIRCLE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F785, None, "MEDIUM BOLD WHITE CIRCLE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F786, None, "BOLD WHITE CIRCLE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F787, None, "HEAVY WHITE CIRCLE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F788, None, "VERY HEAVY WHITE CIRCLE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F789, None, "EXTREMELY HEAVY WHITE CIRCLE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F78A, None, "WHITE CIRCLE CONTAINING BLACK SMALL CIRCLE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F78B, None, "ROUND TARGET", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F78C, None, "BLACK TINY SQUARE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F78D, None, "BLACK SLIGHTLY SMALL SQUARE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F78E, None, "LIGHT WHITE SQUARE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F78F, None, "MEDIUM WHITE SQUARE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F790, None, "BOLD WHITE SQUARE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F791, None, "HEAVY WHITE SQUARE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F792, None, "VERY HEAVY WHITE SQUARE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F793, None, "EXTREMELY HEAVY WHITE SQUARE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F794, None, "WHITE SQUARE CONTAINING BLACK VERY SMALL SQUARE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F795, None, "WHITE SQUARE CONTAINING BLACK MEDIUM SQUARE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F796, None, "SQUARE TARGET", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F797, None, "BLACK TINY DIAMOND", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F798, None, "BLACK VERY SMALL DIAMOND", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F799, None, "BLACK MEDIUM SMALL DIAMOND", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F79A, None, "WHITE DIAMOND CONTAINING BLACK VERY SMALL DIAMOND", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F79B, None, "WHITE DIAMOND CONTAINING BLACK MEDIUM DIAMOND", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F79C, None, "DIAMOND TARGET", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F79D, None, "BLACK TINY LOZENGE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F79E, None, "BLACK VERY SMALL LOZENGE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F79F, None, "BLACK MEDIUM SMALL LOZENGE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7A0, None, "WHITE LOZENGE CONTAINING BLACK SMALL LOZENGE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7A1, None, "THIN GREEK CROSS", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7A2, None, "LIGHT GREEK CROSS", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7A3, None, "MEDIUM GREEK CROSS", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7A4, None, "BOLD GREEK CROSS", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7A5, None, "VERY BOLD GREEK CROSS", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7A6, None, "VERY HEAVY GREEK CROSS", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7A7, None, "EXTREMELY HEAVY GREEK CROSS", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7A8, None, "THIN SALTIRE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7A9, None, "LIGHT SALTIRE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7AA, None, "MEDIUM SALTIRE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7AB, None, "BOLD SALTIRE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7AC, None, "HEAVY SALTIRE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7AD, None, "VERY HEAVY SALTIRE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7AE, None, "EXTREMELY HEAVY SALTIRE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7AF, None, "LIGHT FIVE SPOKED ASTERISK", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7B0, None, "MEDIUM FIVE SPOKED ASTERISK", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7B1, None, "BOLD FIVE SPOKED ASTERISK", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7B2, None, "HEAVY FIVE SPOKED ASTERISK", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7B3, None, "VERY HEAVY FIVE SPOKED ASTERISK", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7B4, None, "EXTREMELY HEAVY FIVE SPOKED ASTERISK", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7B5, None, "LIGHT SIX SPOKED ASTERISK", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7B6, None, "MEDIUM SIX SPOKED ASTERISK", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7B7, None, "BOLD SIX SPOKED ASTERISK", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7B8, None, "HEAVY SIX SPOKED ASTERISK", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7B9, None, "VERY HEAVY SIX SPOKED ASTERISK", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7BA, None, "EXTREMELY HEAVY SIX SPOKED ASTERISK", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7BB, None, "LIGHT EIGHT SPOKED ASTERISK", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7BC, None, "MEDIUM EIGHT SPOKED ASTERISK", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7BD, None, "BOLD EIGHT SPOKED ASTERISK", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7BE, None, "HEAVY EIGHT SPOKED ASTERISK", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7BF, None, "VERY HEAVY EIGHT SPOKED ASTERISK", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7C0, None, "LIGHT THREE POINTED BLACK STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7C1, None, "MEDIUM THREE POINTED BLACK STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7C2, None, "THREE POINTED BLACK STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7C3, None, "MEDIUM THREE POINTED PINWHEEL STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7C4, None, "LIGHT FOUR POINTED BLACK STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7C5, None, "MEDIUM FOUR POINTED BLACK STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7C6, None, "FOUR POINTED BLACK STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7C7, None, "MEDIUM FOUR POINTED PINWHEEL STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7C8, None, "REVERSE LIGHT FOUR POINTED PINWHEEL STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7C9, None, "LIGHT FIVE POINTED BLACK STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7CA, None, "HEAVY FIVE POINTED BLACK STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7CB, None, "MEDIUM SIX POINTED BLACK STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7CC, None, "HEAVY SIX POINTED BLACK STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7CD, None, "SIX POINTED PINWHEEL STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7CE, None, "MEDIUM EIGHT POINTED BLACK STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7CF, None, "HEAVY EIGHT POINTED BLACK STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7D0, None, "VERY HEAVY EIGHT POINTED BLACK STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7D1, None, "HEAVY EIGHT POINTED PINWHEEL STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7D2, None, "LIGHT TWELVE POINTED BLACK STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7D3, None, "HEAVY TWELVE POINTED BLACK STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7D4, None, "HEAVY TWELVE POINTED PINWHEEL STAR", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7D5, None, "CIRCLED TRIANGLE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7D6, None, "NEGATIVE CIRCLED TRIANGLE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7D7, None, "CIRCLED SQUARE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7D8, None, "NEGATIVE CIRCLED SQUARE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7E0, None, "LARGE ORANGE CIRCLE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7E1, None, "LARGE YELLOW CIRCLE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7E2, None, "LARGE GREEN CIRCLE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7E3, None, "LARGE PURPLE CIRCLE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7E4, None, "LARGE BROWN CIRCLE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7E5, None, "LARGE RED SQUARE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7E6, None, "LARGE BLUE SQUARE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7E7, None, "LARGE ORANGE SQUARE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7E8, None, "LARGE YELLOW SQUARE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7E9, None, "LARGE GREEN SQUARE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7EA, None, "LARGE PURPLE SQUARE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7EB, None, "LARGE BROWN SQUARE", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F7F0, None, "HEAVY EQUALS SIGN", 0x00, "Geometric_Shapes_Ext"),
    c(0x1F800, None, "LEFTWARDS ARROW WITH SMALL TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F801, None, "UPWARDS ARROW WITH SMALL TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F802, None, "RIGHTWARDS ARROW WITH SMALL TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F803, None, "DOWNWARDS ARROW WITH SMALL TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F804, None, "LEFTWARDS ARROW WITH MEDIUM TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F805, None, "UPWARDS ARROW WITH MEDIUM TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F806, None, "RIGHTWARDS ARROW WITH MEDIUM TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F807, None, "DOWNWARDS ARROW WITH MEDIUM TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F808, None, "LEFTWARDS ARROW WITH LARGE TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F809, None, "UPWARDS ARROW WITH LARGE TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F80A, None, "RIGHTWARDS ARROW WITH LARGE TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F80B, None, "DOWNWARDS ARROW WITH LARGE TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F810, None, "LEFTWARDS ARROW WITH SMALL EQUILATERAL ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F811, None, "UPWARDS ARROW WITH SMALL EQUILATERAL ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F812, None, "RIGHTWARDS ARROW WITH SMALL EQUILATERAL ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F813, None, "DOWNWARDS ARROW WITH SMALL EQUILATERAL ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F814, None, "LEFTWARDS ARROW WITH EQUILATERAL ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F815, None, "UPWARDS ARROW WITH EQUILATERAL ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F816, None, "RIGHTWARDS ARROW WITH EQUILATERAL ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F817, None, "DOWNWARDS ARROW WITH EQUILATERAL ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F818, None, "HEAVY LEFTWARDS ARROW WITH EQUILATERAL ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F819, None, "HEAVY UPWARDS ARROW WITH EQUILATERAL ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F81A, None, "HEAVY RIGHTWARDS ARROW WITH EQUILATERAL ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F81B, None, "HEAVY DOWNWARDS ARROW WITH EQUILATERAL ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F81C, None, "HEAVY LEFTWARDS ARROW WITH LARGE EQUILATERAL ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F81D, None, "HEAVY UPWARDS ARROW WITH LARGE EQUILATERAL ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F81E, None, "HEAVY RIGHTWARDS ARROW WITH LARGE EQUILATERAL ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F81F, None, "HEAVY DOWNWARDS ARROW WITH LARGE EQUILATERAL ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F820, None, "LEFTWARDS TRIANGLE-HEADED ARROW WITH NARROW SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F821, None, "UPWARDS TRIANGLE-HEADED ARROW WITH NARROW SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F822, None, "RIGHTWARDS TRIANGLE-HEADED ARROW WITH NARROW SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F823, None, "DOWNWARDS TRIANGLE-HEADED ARROW WITH NARROW SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F824, None, "LEFTWARDS TRIANGLE-HEADED ARROW WITH MEDIUM SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F825, None, "UPWARDS TRIANGLE-HEADED ARROW WITH MEDIUM SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F826, None, "RIGHTWARDS TRIANGLE-HEADED ARROW WITH MEDIUM SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F827, None, "DOWNWARDS TRIANGLE-HEADED ARROW WITH MEDIUM SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F828, None, "LEFTWARDS TRIANGLE-HEADED ARROW WITH BOLD SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F829, None, "UPWARDS TRIANGLE-HEADED ARROW WITH BOLD SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F82A, None, "RIGHTWARDS TRIANGLE-HEADED ARROW WITH BOLD SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F82B, None, "DOWNWARDS TRIANGLE-HEADED ARROW WITH BOLD SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F82C, None, "LEFTWARDS TRIANGLE-HEADED ARROW WITH HEAVY SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F82D, None, "UPWARDS TRIANGLE-HEADED ARROW WITH HEAVY SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F82E, None, "RIGHTWARDS TRIANGLE-HEADED ARROW WITH HEAVY SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F82F, None, "DOWNWARDS TRIANGLE-HEADED ARROW WITH HEAVY SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F830, None, "LEFTWARDS TRIANGLE-HEADED ARROW WITH VERY HEAVY SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F831, None, "UPWARDS TRIANGLE-HEADED ARROW WITH VERY HEAVY SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F832, None, "RIGHTWARDS TRIANGLE-HEADED ARROW WITH VERY HEAVY SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F833, None, "DOWNWARDS TRIANGLE-HEADED ARROW WITH VERY HEAVY SHAFT", 0x00, "Sup_Arrows_C"),
    c(0x1F834, None, "LEFTWARDS FINGER-POST ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F835, None, "UPWARDS FINGER-POST ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F836, None, "RIGHTWARDS FINGER-POST ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F837, None, "DOWNWARDS FINGER-POST ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F838, None, "LEFTWARDS SQUARED ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F839, None, "UPWARDS SQUARED ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F83A, None, "RIGHTWARDS SQUARED ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F83B, None, "DOWNWARDS SQUARED ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F83C, None, "LEFTWARDS COMPRESSED ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F83D, None, "UPWARDS COMPRESSED ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F83E, None, "RIGHTWARDS COMPRESSED ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F83F, None, "DOWNWARDS COMPRESSED ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F840, None, "LEFTWARDS HEAVY COMPRESSED ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F841, None, "UPWARDS HEAVY COMPRESSED ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F842, None, "RIGHTWARDS HEAVY COMPRESSED ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F843, None, "DOWNWARDS HEAVY COMPRESSED ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F844, None, "LEFTWARDS HEAVY ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F845, None, "UPWARDS HEAVY ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F846, None, "RIGHTWARDS HEAVY ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F847, None, "DOWNWARDS HEAVY ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F850, None, "LEFTWARDS SANS-SERIF ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F851, None, "UPWARDS SANS-SERIF ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F852, None, "RIGHTWARDS SANS-SERIF ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F853, None, "DOWNWARDS SANS-SERIF ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F854, None, "NORTH WEST SANS-SERIF ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F855, None, "NORTH EAST SANS-SERIF ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F856, None, "SOUTH EAST SANS-SERIF ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F857, None, "SOUTH WEST SANS-SERIF ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F858, None, "LEFT RIGHT SANS-SERIF ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F859, None, "UP DOWN SANS-SERIF ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F860, None, "WIDE-HEADED LEFTWARDS LIGHT BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F861, None, "WIDE-HEADED UPWARDS LIGHT BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F862, None, "WIDE-HEADED RIGHTWARDS LIGHT BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F863, None, "WIDE-HEADED DOWNWARDS LIGHT BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F864, None, "WIDE-HEADED NORTH WEST LIGHT BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F865, None, "WIDE-HEADED NORTH EAST LIGHT BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F866, None, "WIDE-HEADED SOUTH EAST LIGHT BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F867, None, "WIDE-HEADED SOUTH WEST LIGHT BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F868, None, "WIDE-HEADED LEFTWARDS BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F869, None, "WIDE-HEADED UPWARDS BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F86A, None, "WIDE-HEADED RIGHTWARDS BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F86B, None, "WIDE-HEADED DOWNWARDS BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F86C, None, "WIDE-HEADED NORTH WEST BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F86D, None, "WIDE-HEADED NORTH EAST BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F86E, None, "WIDE-HEADED SOUTH EAST BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F86F, None, "WIDE-HEADED SOUTH WEST BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F870, None, "WIDE-HEADED LEFTWARDS MEDIUM BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F871, None, "WIDE-HEADED UPWARDS MEDIUM BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F872, None, "WIDE-HEADED RIGHTWARDS MEDIUM BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F873, None, "WIDE-HEADED DOWNWARDS MEDIUM BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F874, None, "WIDE-HEADED NORTH WEST MEDIUM BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F875, None, "WIDE-HEADED NORTH EAST MEDIUM BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F876, None, "WIDE-HEADED SOUTH EAST MEDIUM BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F877, None, "WIDE-HEADED SOUTH WEST MEDIUM BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F878, None, "WIDE-HEADED LEFTWARDS HEAVY BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F879, None, "WIDE-HEADED UPWARDS HEAVY BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F87A, None, "WIDE-HEADED RIGHTWARDS HEAVY BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F87B, None, "WIDE-HEADED DOWNWARDS HEAVY BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F87C, None, "WIDE-HEADED NORTH WEST HEAVY BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F87D, None, "WIDE-HEADED NORTH EAST HEAVY BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F87E, None, "WIDE-HEADED SOUTH EAST HEAVY BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F87F, None, "WIDE-HEADED SOUTH WEST HEAVY BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F880, None, "WIDE-HEADED LEFTWARDS VERY HEAVY BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F881, None, "WIDE-HEADED UPWARDS VERY HEAVY BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F882, None, "WIDE-HEADED RIGHTWARDS VERY HEAVY BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F883, None, "WIDE-HEADED DOWNWARDS VERY HEAVY BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F884, None, "WIDE-HEADED NORTH WEST VERY HEAVY BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F885, None, "WIDE-HEADED NORTH EAST VERY HEAVY BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F886, None, "WIDE-HEADED SOUTH EAST VERY HEAVY BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F887, None, "WIDE-HEADED SOUTH WEST VERY HEAVY BARB ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F890, None, "LEFTWARDS TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F891, None, "UPWARDS TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F892, None, "RIGHTWARDS TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F893, None, "DOWNWARDS TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F894, None, "LEFTWARDS WHITE ARROW WITHIN TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F895, None, "UPWARDS WHITE ARROW WITHIN TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F896, None, "RIGHTWARDS WHITE ARROW WITHIN TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F897, None, "DOWNWARDS WHITE ARROW WITHIN TRIANGLE ARROWHEAD", 0x00, "Sup_Arrows_C"),
    c(0x1F898, None, "LEFTWARDS ARROW WITH NOTCHED TAIL", 0x00, "Sup_Arrows_C"),
    c(0x1F899, None, "UPWARDS ARROW WITH NOTCHED TAIL", 0x00, "Sup_Arrows_C"),
    c(0x1F89A, None, "RIGHTWARDS ARROW WITH NOTCHED TAIL", 0x00, "Sup_Arrows_C"),
    c(0x1F89B, None, "DOWNWARDS ARROW WITH NOTCHED TAIL", 0x00, "Sup_Arrows_C"),
    c(0x1F89C, None, "HEAVY ARROW SHAFT WIDTH ONE", 0x00, "Sup_Arrows_C"),
    c(0x1F89D, None, "HEAVY ARROW SHAFT WIDTH TWO THIRDS", 0x00, "Sup_Arrows_C"),
    c(0x1F89E, None, "HEAVY ARROW SHAFT WIDTH ONE HALF", 0x00, "Sup_Arrows_C"),
    c(0x1F89F, None, "HEAVY ARROW SHAFT WIDTH ONE THIRD", 0x00, "Sup_Arrows_C"),
    c(0x1F8A0, None, "LEFTWARDS BOTTOM-SHADED WHITE ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F8A1, None, "RIGHTWARDS BOTTOM SHADED WHITE ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F8A2, None, "LEFTWARDS TOP SHADED WHITE ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F8A3, None, "RIGHTWARDS TOP SHADED WHITE ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F8A4, None, "LEFTWARDS LEFT-SHADED WHITE ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F8A5, None, "RIGHTWARDS RIGHT-SHADED WHITE ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F8A6, None, "LEFTWARDS RIGHT-SHADED WHITE ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F8A7, None, "RIGHTWARDS LEFT-SHADED WHITE ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F8A8, None, "LEFTWARDS BACK-TILTED SHADOWED WHITE ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F8A9, None, "RIGHTWARDS BACK-TILTED SHADOWED WHITE ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F8AA, None, "LEFTWARDS FRONT-TILTED SHADOWED WHITE ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F8AB, None, "RIGHTWARDS FRONT-TILTED SHADOWED WHITE ARROW", 0x00, "Sup_Arrows_C"),
    c(0x1F8AC, None, "WHITE ARROW SHAFT WIDTH ONE", 0x00, "Sup_Arrows_C"),
    c(0x1F8AD, None, "WHITE ARROW SHAFT WIDTH TWO THIRDS", 0x00, "Sup_Arrows_C"),
    c(0x1F8B0, None, "ARROW POINTING UPWARDS THEN NORTH WEST", 0x00, "Sup_Arrows_C"),
    c(0x1F8B1, None, "ARROW POINTING RIGHTWARDS THEN CURVING SOUTH WEST", 0x00, "Sup_Arrows_C"),
    c(0x1F900, None, "CIRCLED CROSS FORMEE WITH FOUR DOTS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F901, None, "CIRCLED CROSS FORMEE WITH TWO DOTS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F902, None, "CIRCLED CROSS FORMEE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F903, None, "LEFT HALF CIRCLE WITH FOUR DOTS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F904, None, "LEFT HALF CIRCLE WITH THREE DOTS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F905, None, "LEFT HALF CIRCLE WITH TWO DOTS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F906, None, "LEFT HALF CIRCLE WITH DOT", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F907, None, "LEFT HALF CIRCLE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F908, None, "DOWNWARD FACING HOOK", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F909, None, "DOWNWARD FACING NOTCHED HOOK", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F90A, None, "DOWNWARD FACING HOOK WITH DOT", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F90B, None, "DOWNWARD FACING NOTCHED HOOK WITH DOT", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F90C, None, "PINCHED FINGERS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F90D, None, "WHITE HEART", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F90E, None, "BROWN HEART", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F90F, None, "PINCHING HAND", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F910, None, "ZIPPER-MOUTH FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F911, None, "MONEY-MOUTH FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F912, None, "FACE WITH THERMOMETER", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F913, None, "NERD FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F914, None, "THINKING FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F915, None, "FACE WITH HEAD-BANDAGE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F916, None, "ROBOT FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F917, None, "HUGGING FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F918, None, "SIGN OF THE HORNS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F919, None, "CALL ME HAND", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F91A, None, "RAISED BACK OF HAND", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F91B, None, "LEFT-FACING FIST", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F91C, None, "RIGHT-FACING FIST", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F91D, None, "HANDSHAKE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F91E, None, "HAND WITH INDEX AND MIDDLE FINGERS CROSSED", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F91F, None, "I LOVE YOU HAND SIGN", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F920, None, "FACE WITH COWBOY HAT", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F921, None, "CLOWN FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F922, None, "NAUSEATED FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F923, None, "ROLLING ON THE FLOOR LAUGHING", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F924, None, "DROOLING FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F925, None, "LYING FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F926, None, "FACE PALM", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F927, None, "SNEEZING FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F928, None, "FACE WITH ONE EYEBROW RAISED", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F929, None, "GRINNING FACE WITH STAR EYES", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F92A, None, "GRINNING FACE WITH ONE LARGE AND ONE SMALL EYE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F92B, None, "FACE WITH FINGER COVERING CLOSED LIPS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F92C, None, "SERIOUS FACE WITH SYMBOLS COVERING MOUTH", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F92D, None, "SMILING FACE WITH SMILING EYES AND HAND COVERING MOUTH", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F92E, None, "FACE WITH OPEN MOUTH VOMITING", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F92F, None, "SHOCKED FACE WITH EXPLODING HEAD", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F930, None, "PREGNANT WOMAN", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F931, None, "BREAST-FEEDING", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F932, None, "PALMS UP TOGETHER", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F933, None, "SELFIE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F934, None, "PRINCE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F935, None, "MAN IN TUXEDO", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F936, None, "MOTHER CHRISTMAS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F937, None, "SHRUG", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F938, None, "PERSON DOING CARTWHEEL", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F939, None, "JUGGLING", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F93A, None, "FENCER", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F93B, None, "MODERN PENTATHLON", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F93C, None, "WRESTLERS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F93D, None, "WATER POLO", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F93E, None, "HANDBALL", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F93F, None, "DIVING MASK", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F940, None, "WILTED FLOWER", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F941, None, "DRUM WITH DRUMSTICKS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F942, None, "CLINKING GLASSES", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F943, None, "TUMBLER GLASS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F944, None, "SPOON", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F945, None, "GOAL NET", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F946, None, "RIFLE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F947, None, "FIRST PLACE MEDAL", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F948, None, "SECOND PLACE MEDAL", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F949, None, "THIRD PLACE MEDAL", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F94A, None, "BOXING GLOVE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F94B, None, "MARTIAL ARTS UNIFORM", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F94C, None, "CURLING STONE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F94D, None, "LACROSSE STICK AND BALL", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F94E, None, "SOFTBALL", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F94F, None, "FLYING DISC", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F950, None, "CROISSANT", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F951, None, "AVOCADO", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F952, None, "CUCUMBER", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F953, None, "BACON", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F954, None, "POTATO", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F955, None, "CARROT", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F956, None, "BAGUETTE BREAD", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F957, None, "GREEN SALAD", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F958, None, "SHALLOW PAN OF FOOD", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F959, None, "STUFFED FLATBREAD", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F95A, None, "EGG", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F95B, None, "GLASS OF MILK", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F95C, None, "PEANUTS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F95D, None, "KIWIFRUIT", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F95E, None, "PANCAKES", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F95F, None, "DUMPLING", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F960, None, "FORTUNE COOKIE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F961, None, "TAKEOUT BOX", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F962, None, "CHOPSTICKS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F963, None, "BOWL WITH SPOON", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F964, None, "CUP WITH STRAW", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F965, None, "COCONUT", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F966, None, "BROCCOLI", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F967, None, "PIE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F968, None, "PRETZEL", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F969, None, "CUT OF MEAT", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F96A, None, "SANDWICH", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F96B, None, "CANNED FOOD", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F96C, None, "LEAFY GREEN", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F96D, None, "MANGO", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F96E, None, "MOON CAKE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F96F, None, "BAGEL", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F970, None, "SMILING FACE WITH SMILING EYES AND THREE HEARTS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F971, None, "YAWNING FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F972, None, "SMILING FACE WITH TEAR", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F973, None, "FACE WITH PARTY HORN AND PARTY HAT", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F974, None, "FACE WITH UNEVEN EYES AND WAVY MOUTH", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F975, None, "OVERHEATED FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F976, None, "FREEZING FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F977, None, "NINJA", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F978, None, "DISGUISED FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F979, None, "FACE HOLDING BACK TEARS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F97A, None, "FACE WITH PLEADING EYES", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F97B, None, "SARI", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F97C, None, "LAB COAT", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F97D, None, "GOGGLES", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F97E, None, "HIKING BOOT", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F97F, None, "FLAT SHOE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F980, None, "CRAB", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F981, None, "LION FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F982, None, "SCORPION", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F983, None, "TURKEY", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F984, None, "UNICORN FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F985, None, "EAGLE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F986, None, "DUCK", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F987, None, "BAT", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F988, None, "SHARK", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F989, None, "OWL", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F98A, None, "FOX FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F98B, None, "BUTTERFLY", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F98C, None, "DEER", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F98D, None, "GORILLA", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F98E, None, "LIZARD", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F98F, None, "RHINOCEROS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F990, None, "SHRIMP", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F991, None, "SQUID", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F992, None, "GIRAFFE FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F993, None, "ZEBRA FACE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F994, None, "HEDGEHOG", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F995, None, "SAUROPOD", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F996, None, "T-REX", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F997, None, "CRICKET", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F998, None, "KANGAROO", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F999, None, "LLAMA", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F99A, None, "PEACOCK", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F99B, None, "HIPPOPOTAMUS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F99C, None, "PARROT", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F99D, None, "RACCOON", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F99E, None, "LOBSTER", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F99F, None, "MOSQUITO", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9A0, None, "MICROBE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9A1, None, "BADGER", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9A2, None, "SWAN", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9A3, None, "MAMMOTH", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9A4, None, "DODO", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9A5, None, "SLOTH", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9A6, None, "OTTER", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9A7, None, "ORANGUTAN", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9A8, None, "SKUNK", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9A9, None, "FLAMINGO", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9AA, None, "OYSTER", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9AB, None, "BEAVER", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9AC, None, "BISON", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9AD, None, "SEAL", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9AE, None, "GUIDE DOG", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9AF, None, "PROBING CANE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9B0, None, "EMOJI COMPONENT RED HAIR", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9B1, None, "EMOJI COMPONENT CURLY HAIR", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9B2, None, "EMOJI COMPONENT BALD", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9B3, None, "EMOJI COMPONENT WHITE HAIR", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9B4, None, "BONE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9B5, None, "LEG", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9B6, None, "FOOT", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9B7, None, "TOOTH", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9B8, None, "SUPERHERO", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9B9, None, "SUPERVILLAIN", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9BA, None, "SAFETY VEST", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9BB, None, "EAR WITH HEARING AID", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9BC, None, "MOTORIZED WHEELCHAIR", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9BD, None, "MANUAL WHEELCHAIR", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9BE, None, "MECHANICAL ARM", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9BF, None, "MECHANICAL LEG", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9C0, None, "CHEESE WEDGE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9C1, None, "CUPCAKE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9C2, None, "SALT SHAKER", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9C3, None, "BEVERAGE BOX", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9C4, None, "GARLIC", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9C5, None, "ONION", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9C6, None, "FALAFEL", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9C7, None, "WAFFLE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9C8, None, "BUTTER", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9C9, None, "MATE DRINK", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9CA, None, "ICE CUBE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9CB, None, "BUBBLE TEA", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9CC, None, "TROLL", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9CD, None, "STANDING PERSON", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9CE, None, "KNEELING PERSON", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9CF, None, "DEAF PERSON", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9D0, None, "FACE WITH MONOCLE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9D1, None, "ADULT", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9D2, None, "CHILD", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9D3, None, "OLDER ADULT", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9D4, None, "BEARDED PERSON", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9D5, None, "PERSON WITH HEADSCARF", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9D6, None, "PERSON IN STEAMY ROOM", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9D7, None, "PERSON CLIMBING", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9D8, None, "PERSON IN LOTUS POSITION", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9D9, None, "MAGE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9DA, None, "FAIRY", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9DB, None, "VAMPIRE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9DC, None, "MERPERSON", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9DD, None, "ELF", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9DE, None, "GENIE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9DF, None, "ZOMBIE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9E0, None, "BRAIN", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9E1, None, "ORANGE HEART", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9E2, None, "BILLED CAP", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9E3, None, "SCARF", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9E4, None, "GLOVES", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9E5, None, "COAT", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9E6, None, "SOCKS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9E7, None, "RED GIFT ENVELOPE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9E8, None, "FIRECRACKER", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9E9, None, "JIGSAW PUZZLE PIECE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9EA, None, "TEST TUBE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9EB, None, "PETRI DISH", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9EC, None, "DNA DOUBLE HELIX", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9ED, None, "COMPASS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9EE, None, "ABACUS", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9EF, None, "FIRE EXTINGUISHER", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9F0, None, "TOOLBOX", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9F1, None, "BRICK", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9F2, None, "MAGNET", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9F3, None, "LUGGAGE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9F4, None, "LOTION BOTTLE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9F5, None, "SPOOL OF THREAD", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9F6, None, "BALL OF YARN", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9F7, None, "SAFETY PIN", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9F8, None, "TEDDY BEAR", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9F9, None, "BROOM", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9FA, None, "BASKET", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9FB, None, "ROLL OF PAPER", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9FC, None, "BAR OF SOAP", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9FD, None, "SPONGE", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9FE, None, "RECEIPT", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1F9FF, None, "NAZAR AMULET", 0x00, "Sup_Symbols_And_Pictographs"),
    c(0x1FA00, None, "NEUTRAL CHESS KING", 0x00, "Chess_Symbols"),
    c(0x1FA01, None, "NEUTRAL CHESS QUEEN", 0x00, "Chess_Symbols"),
    c(0x1FA02, None, "NEUTRAL CHESS ROOK", 0x00, "Chess_Symbols"),
    c(0x1FA03, None, "NEUTRAL CHESS BISHOP", 0x00, "Chess_Symbols"),
    c(0x1FA04, None, "NEUTRAL CHESS KNIGHT", 0x00, "Chess_Symbols"),
    c(0x1FA05, None, "NEUTRAL CHESS PAWN", 0x00, "Chess_Symbols"),
    c(0x1FA06, None, "WHITE CHESS KNIGHT ROTATED FORTY-FIVE DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA07, None, "BLACK CHESS KNIGHT ROTATED FORTY-FIVE DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA08, None, "NEUTRAL CHESS KNIGHT ROTATED FORTY-FIVE DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA09, None, "WHITE CHESS KING ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA0A, None, "WHITE CHESS QUEEN ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA0B, None, "WHITE CHESS ROOK ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA0C, None, "WHITE CHESS BISHOP ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA0D, None, "WHITE CHESS KNIGHT ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA0E, None, "WHITE CHESS PAWN ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA0F, None, "BLACK CHESS KING ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA10, None, "BLACK CHESS QUEEN ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA11, None, "BLACK CHESS ROOK ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA12, None, "BLACK CHESS BISHOP ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA13, None, "BLACK CHESS KNIGHT ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA14, None, "BLACK CHESS PAWN ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA15, None, "NEUTRAL CHESS KING ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA16, None, "NEUTRAL CHESS QUEEN ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA17, None, "NEUTRAL CHESS ROOK ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA18, None, "NEUTRAL CHESS BISHOP ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA19, None, "NEUTRAL CHESS KNIGHT ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA1A, None, "NEUTRAL CHESS PAWN ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA1B, None, "WHITE CHESS KNIGHT ROTATED ONE HUNDRED THIRTY-FIVE DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA1C, None, "BLACK CHESS KNIGHT ROTATED ONE HUNDRED THIRTY-FIVE DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA1D, None, "NEUTRAL CHESS KNIGHT ROTATED ONE HUNDRED THIRTY-FIVE DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA1E, None, "WHITE CHESS TURNED KING", 0x00, "Chess_Symbols"),
    c(0x1FA1F, None, "WHITE CHESS TURNED QUEEN", 0x00, "Chess_Symbols"),
    c(0x1FA20, None, "WHITE CHESS TURNED ROOK", 0x00, "Chess_Symbols"),
    c(0x1FA21, None, "WHITE CHESS TURNED BISHOP", 0x00, "Chess_Symbols"),
    c(0x1FA22, None, "WHITE CHESS TURNED KNIGHT", 0x00, "Chess_Symbols"),
    c(0x1FA23, None, "WHITE CHESS TURNED PAWN", 0x00, "Chess_Symbols"),
    c(0x1FA24, None, "BLACK CHESS TURNED KING", 0x00, "Chess_Symbols"),
    c(0x1FA25, None, "BLACK CHESS TURNED QUEEN", 0x00, "Chess_Symbols"),
    c(0x1FA26, None, "BLACK CHESS TURNED ROOK", 0x00, "Chess_Symbols"),
    c(0x1FA27, None, "BLACK CHESS TURNED BISHOP", 0x00, "Chess_Symbols"),
    c(0x1FA28, None, "BLACK CHESS TURNED KNIGHT", 0x00, "Chess_Symbols"),
    c(0x1FA29, None, "BLACK CHESS TURNED PAWN", 0x00, "Chess_Symbols"),
    c(0x1FA2A, None, "NEUTRAL CHESS TURNED KING", 0x00, "Chess_Symbols"),
    c(0x1FA2B, None, "NEUTRAL CHESS TURNED QUEEN", 0x00, "Chess_Symbols"),
    c(0x1FA2C, None, "NEUTRAL CHESS TURNED ROOK", 0x00, "Chess_Symbols"),
    c(0x1FA2D, None, "NEUTRAL CHESS TURNED BISHOP", 0x00, "Chess_Symbols"),
    c(0x1FA2E, None, "NEUTRAL CHESS TURNED KNIGHT", 0x00, "Chess_Symbols"),
    c(0x1FA2F, None, "NEUTRAL CHESS TURNED PAWN", 0x00, "Chess_Symbols"),
    c(0x1FA30, None, "WHITE CHESS KNIGHT ROTATED TWO HUNDRED TWENTY-FIVE DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA31, None, "BLACK CHESS KNIGHT ROTATED TWO HUNDRED TWENTY-FIVE DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA32, None, "NEUTRAL CHESS KNIGHT ROTATED TWO HUNDRED TWENTY-FIVE DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA33, None, "WHITE CHESS KING ROTATED TWO HUNDRED SEVENTY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA34, None, "WHITE CHESS QUEEN ROTATED TWO HUNDRED SEVENTY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA35, None, "WHITE CHESS ROOK ROTATED TWO HUNDRED SEVENTY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA36, None, "WHITE CHESS BISHOP ROTATED TWO HUNDRED SEVENTY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA37, None, "WHITE CHESS KNIGHT ROTATED TWO HUNDRED SEVENTY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA38, None, "WHITE CHESS PAWN ROTATED TWO HUNDRED SEVENTY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA39, None, "BLACK CHESS KING ROTATED TWO HUNDRED SEVENTY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA3A, None, "BLACK CHESS QUEEN ROTATED TWO HUNDRED SEVENTY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA3B, None, "BLACK CHESS ROOK ROTATED TWO HUNDRED SEVENTY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA3C, None, "BLACK CHESS BISHOP ROTATED TWO HUNDRED SEVENTY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA3D, None, "BLACK CHESS KNIGHT ROTATED TWO HUNDRED SEVENTY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA3E, None, "BLACK CHESS PAWN ROTATED TWO HUNDRED SEVENTY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA3F, None, "NEUTRAL CHESS KING ROTATED TWO HUNDRED SEVENTY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA40, None, "NEUTRAL CHESS QUEEN ROTATED TWO HUNDRED SEVENTY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA41, None, "NEUTRAL CHESS ROOK ROTATED TWO HUNDRED SEVENTY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA42, None, "NEUTRAL CHESS BISHOP ROTATED TWO HUNDRED SEVENTY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA43, None, "NEUTRAL CHESS KNIGHT ROTATED TWO HUNDRED SEVENTY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA44, None, "NEUTRAL CHESS PAWN ROTATED TWO HUNDRED SEVENTY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA45, None, "WHITE CHESS KNIGHT ROTATED THREE HUNDRED FIFTEEN DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA46, None, "BLACK CHESS KNIGHT ROTATED THREE HUNDRED FIFTEEN DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA47, None, "NEUTRAL CHESS KNIGHT ROTATED THREE HUNDRED FIFTEEN DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA48, None, "WHITE CHESS EQUIHOPPER", 0x00, "Chess_Symbols"),
    c(0x1FA49, None, "BLACK CHESS EQUIHOPPER", 0x00, "Chess_Symbols"),
    c(0x1FA4A, None, "NEUTRAL CHESS EQUIHOPPER", 0x00, "Chess_Symbols"),
    c(0x1FA4B, None, "WHITE CHESS EQUIHOPPER ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA4C, None, "BLACK CHESS EQUIHOPPER ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA4D, None, "NEUTRAL CHESS EQUIHOPPER ROTATED NINETY DEGREES", 0x00, "Chess_Symbols"),
    c(0x1FA4E, None, "WHITE CHESS KNIGHT-QUEEN", 0x00, "Chess_Symbols"),
    c(0x1FA4F, None, "WHITE CHESS KNIGHT-ROOK", 0x00, "Chess_Symbols"),
    c(0x1FA50, None, "WHITE CHESS KNIGHT-BISHOP", 0x00, "Chess_Symbols"),
    c(0x1FA51, None, "BLACK CHESS KNIGHT-QUEEN", 0x00, "Chess_Symbols"),
    c(0x1FA52, None, "BLACK CHESS KNIGHT-ROOK", 0x00, "Chess_Symbols"),
    c(0x1FA53, None, "BLACK CHESS KNIGHT-BISHOP", 0x00, "Chess_Symbols"),
    c(0x1FA60, None, "XIANGQI RED GENERAL", 0x00, "Chess_Symbols"),
    c(0x1FA61, None, "XIANGQI RED MANDARIN", 0x00, "Chess_Symbols"),
    c(0x1FA62, None, "XIANGQI RED ELEPHANT", 0x00, "Chess_Symbols"),
    c(0x1FA63, None, "XIANGQI RED HORSE", 0x00, "Chess_Symbols"),
    c(0x1FA64, None, "XIANGQI RED CHARIOT", 0x00, "Chess_Symbols"),
    c(0x1FA65, None, "XIANGQI RED CANNON", 0x00, "Chess_Symbols"),
    c(0x1FA66, None, "XIANGQI RED SOLDIER", 0x00, "Chess_Symbols"),
    c(0x1FA67, None, "XIANGQI BLACK GENERAL", 0x00, "Chess_Symbols"),
    c(0x1FA68, None, "XIANGQI BLACK MANDARIN", 0x00, "Chess_Symbols"),
    c(0x1FA69, None, "XIANGQI BLACK ELEPHANT", 0x00, "Chess_Symbols"),
    c(0x1FA6A, None, "XIANGQI BLACK HORSE", 0x00, "Chess_Symbols"),
    c(0x1FA6B, None, "XIANGQI BLACK CHARIOT", 0x00, "Chess_Symbols"),
    c(0x1FA6C, None, "XIANGQI BLACK CANNON", 0x00, "Chess_Symbols"),
    c(0x1FA6D, None, "XIANGQI BLACK SOLDIER", 0x00, "Chess_Symbols"),
    c(0x1FA70, None, "BALLET SHOES", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA71, None, "ONE-PIECE SWIMSUIT", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA72, None, "BRIEFS", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA73, None, "SHORTS", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA74, None, "THONG SANDAL", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA78, None, "DROP OF BLOOD", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA79, None, "ADHESIVE BANDAGE", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA7A, None, "STETHOSCOPE", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA7B, None, "X-RAY", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA7C, None, "CRUTCH", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA80, None, "YO-YO", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA81, None, "KITE", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA82, None, "PARACHUTE", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA83, None, "BOOMERANG", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA84, None, "MAGIC WAND", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA85, None, "PINATA", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA86, None, "NESTING DOLLS", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA90, None, "RINGED PLANET", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA91, None, "CHAIR", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA92, None, "RAZOR", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA93, None, "AXE", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA94, None, "DIYA LAMP", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA95, None, "BANJO", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA96, None, "MILITARY HELMET", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA97, None, "ACCORDION", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA98, None, "LONG DRUM", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA99, None, "COIN", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA9A, None, "CARPENTRY SAW", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA9B, None, "SCREWDRIVER", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA9C, None, "LADDER", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA9D, None, "HOOK", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA9E, None, "MIRROR", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FA9F, None, "WINDOW", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAA0, None, "PLUNGER", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAA1, None, "SEWING NEEDLE", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAA2, None, "KNOT", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAA3, None, "BUCKET", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAA4, None, "MOUSE TRAP", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAA5, None, "TOOTHBRUSH", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAA6, None, "HEADSTONE", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAA7, None, "PLACARD", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAA8, None, "ROCK", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAA9, None, "MIRROR BALL", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAAA, None, "IDENTIFICATION CARD", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAAB, None, "LOW BATTERY", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAAC, None, "HAMSA", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAB0, None, "FLY", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAB1, None, "WORM", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAB2, None, "BEETLE", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAB3, None, "COCKROACH", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAB4, None, "POTTED PLANT", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAB5, None, "WOOD", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAB6, None, "FEATHER", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAB7, None, "LOTUS", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAB8, None, "CORAL", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAB9, None, "EMPTY NEST", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FABA, None, "NEST WITH EGGS", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAC0, None, "ANATOMICAL HEART", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAC1, None, "LUNGS", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAC2, None, "PEOPLE HUGGING", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAC3, None, "PREGNANT MAN", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAC4, None, "PREGNANT PERSON", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAC5, None, "PERSON WITH CROWN", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAD0, None, "BLUEBERRIES", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAD1, None, "BELL PEPPER", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAD2, None, "OLIVE", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAD3, None, "FLATBREAD", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAD4, None, "TAMALE", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAD5, None, "FONDUE", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAD6, None, "TEAPOT", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAD7, None, "POURING LIQUID", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAD8, None, "BEANS", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAD9, None, "JAR", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAE0, None, "MELTING FACE", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAE1, None, "SALUTING FACE", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAE2, None, "FACE WITH OPEN EYES AND HAND OVER MOUTH", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAE3, None, "FACE WITH PEEKING EYE", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAE4, None, "FACE WITH DIAGONAL MOUTH", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAE5, None, "DOTTED LINE FACE", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAE6, None, "BITING LIP", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAE7, None, "BUBBLES", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAF0, None, "HAND WITH INDEX FINGER AND THUMB CROSSED", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAF1, None, "RIGHTWARDS HAND", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAF2, None, "LEFTWARDS HAND", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAF3, None, "PALM DOWN HAND", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAF4, None, "PALM UP HAND", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAF5, None, "INDEX POINTING AT THE VIEWER", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FAF6, None, "HEART HANDS", 0x00, "Symbols_And_Pictographs_Ext_A"),
    c(0x1FB00, None, "BLOCK SEXTANT-1", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB01, None, "BLOCK SEXTANT-2", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB02, None, "BLOCK SEXTANT-12", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB03, None, "BLOCK SEXTANT-3", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB04, None, "BLOCK SEXTANT-13", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB05, None, "BLOCK SEXTANT-23", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB06, None, "BLOCK SEXTANT-123", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB07, None, "BLOCK SEXTANT-4", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB08, None, "BLOCK SEXTANT-14", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB09, None, "BLOCK SEXTANT-24", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB0A, None, "BLOCK SEXTANT-124", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB0B, None, "BLOCK SEXTANT-34", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB0C, None, "BLOCK SEXTANT-134", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB0D, None, "BLOCK SEXTANT-234", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB0E, None, "BLOCK SEXTANT-1234", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB0F, None, "BLOCK SEXTANT-5", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB10, None, "BLOCK SEXTANT-15", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB11, None, "BLOCK SEXTANT-25", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB12, None, "BLOCK SEXTANT-125", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB13, None, "BLOCK SEXTANT-35", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB14, None, "BLOCK SEXTANT-235", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB15, None, "BLOCK SEXTANT-1235", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB16, None, "BLOCK SEXTANT-45", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB17, None, "BLOCK SEXTANT-145", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB18, None, "BLOCK SEXTANT-245", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB19, None, "BLOCK SEXTANT-1245", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB1A, None, "BLOCK SEXTANT-345", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB1B, None, "BLOCK SEXTANT-1345", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB1C, None, "BLOCK SEXTANT-2345", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB1D, None, "BLOCK SEXTANT-12345", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB1E, None, "BLOCK SEXTANT-6", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB1F, None, "BLOCK SEXTANT-16", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB20, None, "BLOCK SEXTANT-26", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB21, None, "BLOCK SEXTANT-126", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB22, None, "BLOCK SEXTANT-36", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB23, None, "BLOCK SEXTANT-136", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB24, None, "BLOCK SEXTANT-236", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB25, None, "BLOCK SEXTANT-1236", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB26, None, "BLOCK SEXTANT-46", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB27, None, "BLOCK SEXTANT-146", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB28, None, "BLOCK SEXTANT-1246", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB29, None, "BLOCK SEXTANT-346", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB2A, None, "BLOCK SEXTANT-1346", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB2B, None, "BLOCK SEXTANT-2346", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB2C, None, "BLOCK SEXTANT-12346", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB2D, None, "BLOCK SEXTANT-56", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB2E, None, "BLOCK SEXTANT-156", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB2F, None, "BLOCK SEXTANT-256", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB30, None, "BLOCK SEXTANT-1256", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB31, None, "BLOCK SEXTANT-356", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB32, None, "BLOCK SEXTANT-1356", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB33, None, "BLOCK SEXTANT-2356", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB34, None, "BLOCK SEXTANT-12356", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB35, None, "BLOCK SEXTANT-456", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB36, None, "BLOCK SEXTANT-1456", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB37, None, "BLOCK SEXTANT-2456", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB38, None, "BLOCK SEXTANT-12456", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB39, None, "BLOCK SEXTANT-3456", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB3A, None, "BLOCK SEXTANT-13456", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB3B, None, "BLOCK SEXTANT-23456", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB3C, None, "LOWER LEFT BLOCK DIAGONAL LOWER MIDDLE LEFT TO LOWER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB3D, None, "LOWER LEFT BLOCK DIAGONAL LOWER MIDDLE LEFT TO LOWER RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB3E, None, "LOWER LEFT BLOCK DIAGONAL UPPER MIDDLE LEFT TO LOWER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB3F, None, "LOWER LEFT BLOCK DIAGONAL UPPER MIDDLE LEFT TO LOWER RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB40, None, "LOWER LEFT BLOCK DIAGONAL UPPER LEFT TO LOWER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB41, None, "LOWER RIGHT BLOCK DIAGONAL UPPER MIDDLE LEFT TO UPPER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB42, None, "LOWER RIGHT BLOCK DIAGONAL UPPER MIDDLE LEFT TO UPPER RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB43, None, "LOWER RIGHT BLOCK DIAGONAL LOWER MIDDLE LEFT TO UPPER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB44, None, "LOWER RIGHT BLOCK DIAGONAL LOWER MIDDLE LEFT TO UPPER RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB45, None, "LOWER RIGHT BLOCK DIAGONAL LOWER LEFT TO UPPER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB46, None, "LOWER RIGHT BLOCK DIAGONAL LOWER MIDDLE LEFT TO UPPER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB47, None, "LOWER RIGHT BLOCK DIAGONAL LOWER CENTRE TO LOWER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB48, None, "LOWER RIGHT BLOCK DIAGONAL LOWER LEFT TO LOWER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB49, None, "LOWER RIGHT BLOCK DIAGONAL LOWER CENTRE TO UPPER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB4A, None, "LOWER RIGHT BLOCK DIAGONAL LOWER LEFT TO UPPER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB4B, None, "LOWER RIGHT BLOCK DIAGONAL LOWER CENTRE TO UPPER RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB4C, None, "LOWER LEFT BLOCK DIAGONAL UPPER CENTRE TO UPPER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB4D, None, "LOWER LEFT BLOCK DIAGONAL UPPER LEFT TO UPPER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB4E, None, "LOWER LEFT BLOCK DIAGONAL UPPER CENTRE TO LOWER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB4F, None, "LOWER LEFT BLOCK DIAGONAL UPPER LEFT TO LOWER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB50, None, "LOWER LEFT BLOCK DIAGONAL UPPER CENTRE TO LOWER RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB51, None, "LOWER LEFT BLOCK DIAGONAL UPPER MIDDLE LEFT TO LOWER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB52, None, "UPPER RIGHT BLOCK DIAGONAL LOWER MIDDLE LEFT TO LOWER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB53, None, "UPPER RIGHT BLOCK DIAGONAL LOWER MIDDLE LEFT TO LOWER RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB54, None, "UPPER RIGHT BLOCK DIAGONAL UPPER MIDDLE LEFT TO LOWER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB55, None, "UPPER RIGHT BLOCK DIAGONAL UPPER MIDDLE LEFT TO LOWER RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB56, None, "UPPER RIGHT BLOCK DIAGONAL UPPER LEFT TO LOWER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB57, None, "UPPER LEFT BLOCK DIAGONAL UPPER MIDDLE LEFT TO UPPER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB58, None, "UPPER LEFT BLOCK DIAGONAL UPPER MIDDLE LEFT TO UPPER RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB59, None, "UPPER LEFT BLOCK DIAGONAL LOWER MIDDLE LEFT TO UPPER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB5A, None, "UPPER LEFT BLOCK DIAGONAL LOWER MIDDLE LEFT TO UPPER RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB5B, None, "UPPER LEFT BLOCK DIAGONAL LOWER LEFT TO UPPER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB5C, None, "UPPER LEFT BLOCK DIAGONAL LOWER MIDDLE LEFT TO UPPER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB5D, None, "UPPER LEFT BLOCK DIAGONAL LOWER CENTRE TO LOWER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB5E, None, "UPPER LEFT BLOCK DIAGONAL LOWER LEFT TO LOWER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB5F, None, "UPPER LEFT BLOCK DIAGONAL LOWER CENTRE TO UPPER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB60, None, "UPPER LEFT BLOCK DIAGONAL LOWER LEFT TO UPPER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB61, None, "UPPER LEFT BLOCK DIAGONAL LOWER CENTRE TO UPPER RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB62, None, "UPPER RIGHT BLOCK DIAGONAL UPPER CENTRE TO UPPER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB63, None, "UPPER RIGHT BLOCK DIAGONAL UPPER LEFT TO UPPER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB64, None, "UPPER RIGHT BLOCK DIAGONAL UPPER CENTRE TO LOWER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB65, None, "UPPER RIGHT BLOCK DIAGONAL UPPER LEFT TO LOWER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB66, None, "UPPER RIGHT BLOCK DIAGONAL UPPER CENTRE TO LOWER RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB67, None, "UPPER RIGHT BLOCK DIAGONAL UPPER MIDDLE LEFT TO LOWER MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB68, None, "UPPER AND RIGHT AND LOWER TRIANGULAR THREE QUARTERS BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB69, None, "LEFT AND LOWER AND RIGHT TRIANGULAR THREE QUARTERS BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB6A, None, "UPPER AND LEFT AND LOWER TRIANGULAR THREE QUARTERS BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB6B, None, "LEFT AND UPPER AND RIGHT TRIANGULAR THREE QUARTERS BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB6C, None, "LEFT TRIANGULAR ONE QUARTER BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB6D, None, "UPPER TRIANGULAR ONE QUARTER BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB6E, None, "RIGHT TRIANGULAR ONE QUARTER BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB6F, None, "LOWER TRIANGULAR ONE QUARTER BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB70, None, "VERTICAL ONE EIGHTH BLOCK-2", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB71, None, "VERTICAL ONE EIGHTH BLOCK-3", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB72, None, "VERTICAL ONE EIGHTH BLOCK-4", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB73, None, "VERTICAL ONE EIGHTH BLOCK-5", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB74, None, "VERTICAL ONE EIGHTH BLOCK-6", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB75, None, "VERTICAL ONE EIGHTH BLOCK-7", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB76, None, "HORIZONTAL ONE EIGHTH BLOCK-2", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB77, None, "HORIZONTAL ONE EIGHTH BLOCK-3", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB78, None, "HORIZONTAL ONE EIGHTH BLOCK-4", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB79, None, "HORIZONTAL ONE EIGHTH BLOCK-5", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB7A, None, "HORIZONTAL ONE EIGHTH BLOCK-6", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB7B, None, "HORIZONTAL ONE EIGHTH BLOCK-7", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB7C, None, "LEFT AND LOWER ONE EIGHTH BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB7D, None, "LEFT AND UPPER ONE EIGHTH BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB7E, None, "RIGHT AND UPPER ONE EIGHTH BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB7F, None, "RIGHT AND LOWER ONE EIGHTH BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB80, None, "UPPER AND LOWER ONE EIGHTH BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB81, None, "HORIZONTAL ONE EIGHTH BLOCK-1358", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB82, None, "UPPER ONE QUARTER BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB83, None, "UPPER THREE EIGHTHS BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB84, None, "UPPER FIVE EIGHTHS BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB85, None, "UPPER THREE QUARTERS BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB86, None, "UPPER SEVEN EIGHTHS BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB87, None, "RIGHT ONE QUARTER BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB88, None, "RIGHT THREE EIGHTHS BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB89, None, "RIGHT FIVE EIGHTHS BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB8A, None, "RIGHT THREE QUARTERS BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB8B, None, "RIGHT SEVEN EIGHTHS BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB8C, None, "LEFT HALF MEDIUM SHADE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB8D, None, "RIGHT HALF MEDIUM SHADE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB8E, None, "UPPER HALF MEDIUM SHADE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB8F, None, "LOWER HALF MEDIUM SHADE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB90, None, "INVERSE MEDIUM SHADE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB91, None, "UPPER HALF BLOCK AND LOWER HALF INVERSE MEDIUM SHADE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB92, None, "UPPER HALF INVERSE MEDIUM SHADE AND LOWER HALF BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB94, None, "LEFT HALF INVERSE MEDIUM SHADE AND RIGHT HALF BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB95, None, "CHECKER BOARD FILL", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB96, None, "INVERSE CHECKER BOARD FILL", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB97, None, "HEAVY HORIZONTAL FILL", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB98, None, "UPPER LEFT TO LOWER RIGHT FILL", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB99, None, "UPPER RIGHT TO LOWER LEFT FILL", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB9A, None, "UPPER AND LOWER TRIANGULAR HALF BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB9B, None, "LEFT AND RIGHT TRIANGULAR HALF BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB9C, None, "UPPER LEFT TRIANGULAR MEDIUM SHADE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB9D, None, "UPPER RIGHT TRIANGULAR MEDIUM SHADE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB9E, None, "LOWER RIGHT TRIANGULAR MEDIUM SHADE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FB9F, None, "LOWER LEFT TRIANGULAR MEDIUM SHADE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBA0, None, "BOX DRAWINGS LIGHT DIAGONAL UPPER CENTRE TO MIDDLE LEFT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBA1, None, "BOX DRAWINGS LIGHT DIAGONAL UPPER CENTRE TO MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBA2, None, "BOX DRAWINGS LIGHT DIAGONAL MIDDLE LEFT TO LOWER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBA3, None, "BOX DRAWINGS LIGHT DIAGONAL MIDDLE RIGHT TO LOWER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBA4, None, "BOX DRAWINGS LIGHT DIAGONAL UPPER CENTRE TO MIDDLE LEFT TO LOWER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBA5, None, "BOX DRAWINGS LIGHT DIAGONAL UPPER CENTRE TO MIDDLE RIGHT TO LOWER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBA6, None, "BOX DRAWINGS LIGHT DIAGONAL MIDDLE LEFT TO LOWER CENTRE TO MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBA7, None, "BOX DRAWINGS LIGHT DIAGONAL MIDDLE LEFT TO UPPER CENTRE TO MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBA8, None, "BOX DRAWINGS LIGHT DIAGONAL UPPER CENTRE TO MIDDLE LEFT AND MIDDLE RIGHT TO LOWER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBA9, None, "BOX DRAWINGS LIGHT DIAGONAL UPPER CENTRE TO MIDDLE RIGHT AND MIDDLE LEFT TO LOWER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBAA, None, "BOX DRAWINGS LIGHT DIAGONAL UPPER CENTRE TO MIDDLE RIGHT TO LOWER CENTRE TO MIDDLE LEFT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBAB, None, "BOX DRAWINGS LIGHT DIAGONAL UPPER CENTRE TO MIDDLE LEFT TO LOWER CENTRE TO MIDDLE RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBAC, None, "BOX DRAWINGS LIGHT DIAGONAL MIDDLE LEFT TO UPPER CENTRE TO MIDDLE RIGHT TO LOWER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBAD, None, "BOX DRAWINGS LIGHT DIAGONAL MIDDLE RIGHT TO UPPER CENTRE TO MIDDLE LEFT TO LOWER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBAE, None, "BOX DRAWINGS LIGHT DIAGONAL DIAMOND", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBAF, None, "BOX DRAWINGS LIGHT HORIZONTAL WITH VERTICAL STROKE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBB0, None, "ARROWHEAD-SHAPED POINTER", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBB1, None, "INVERSE CHECK MARK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBB2, None, "LEFT HALF RUNNING MAN", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBB3, None, "RIGHT HALF RUNNING MAN", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBB4, None, "INVERSE DOWNWARDS ARROW WITH TIP LEFTWARDS", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBB5, None, "LEFTWARDS ARROW AND UPPER AND LOWER ONE EIGHTH BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBB6, None, "RIGHTWARDS ARROW AND UPPER AND LOWER ONE EIGHTH BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBB7, None, "DOWNWARDS ARROW AND RIGHT ONE EIGHTH BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBB8, None, "UPWARDS ARROW AND RIGHT ONE EIGHTH BLOCK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBB9, None, "LEFT HALF FOLDER", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBBA, None, "RIGHT HALF FOLDER", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBBB, None, "VOIDED GREEK CROSS", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBBC, None, "RIGHT OPEN SQUARED DOT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBBD, None, "NEGATIVE DIAGONAL CROSS", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBBE, None, "NEGATIVE DIAGONAL MIDDLE RIGHT TO LOWER CENTRE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBBF, None, "NEGATIVE DIAGONAL DIAMOND", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBC0, None, "WHITE HEAVY SALTIRE WITH ROUNDED CORNERS", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBC1, None, "LEFT THIRD WHITE RIGHT POINTING INDEX", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBC2, None, "MIDDLE THIRD WHITE RIGHT POINTING INDEX", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBC3, None, "RIGHT THIRD WHITE RIGHT POINTING INDEX", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBC4, None, "NEGATIVE SQUARED QUESTION MARK", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBC5, None, "STICK FIGURE", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBC6, None, "STICK FIGURE WITH ARMS RAISED", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBC7, None, "STICK FIGURE LEANING LEFT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBC8, None, "STICK FIGURE LEANING RIGHT", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBC9, None, "STICK FIGURE WITH DRESS", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBCA, None, "WHITE UP-POINTING CHEVRON", 0x00, "Symbols_For_Legacy_Computing"),
    c(0x1FBF0, None, "SEGMENTED DIGIT ZERO", 0x20, "Symbols_For_Legacy_Computing"),
    c(0x1FBF1, None, "SEGMENTED DIGIT ONE", 0x20, "Symbols_For_Legacy_Computing"),
    c(0x1FBF2, None, "SEGMENTED DIGIT TWO", 0x20, "Symbols_For_Legacy_Computing"),
    c(0x1FBF3, None, "SEGMENTED DIGIT THREE", 0x20, "Symbols_For_Legacy_Computing"),
    c(0x1FBF4, None, "SEGMENTED DIGIT FOUR", 0x20, "Symbols_For_Legacy_Computing"),
    c(0x1FBF5, None, "SEGMENTED DIGIT FIVE", 0x20, "Symbols_For_Legacy_Computing"),
    c(0x1FBF6, None, "SEGMENTED DIGIT SIX", 0x20, "Symbols_For_Legacy_Computing"),
    c(0x1FBF7, None, "SEGMENTED DIGIT SEVEN", 0x20, "Symbols_For_Legacy_Computing"),
    c(0x1FBF8, None, "SEGMENTED DIGIT EIGHT", 0x20, "Symbols_For_Legacy_Computing"),
    c(0x1FBF9, None, "SEGMENTED DIGIT NINE", 0x20, "Symbols_For_Legacy_Computing"),
    c(0x20000, Some(0x2A6DF), "CJK UNIFIED IDEOGRAPH-#", 0x31, "CJK_Ext_B"),
    c(0x2A700, Some(0x2B738), "CJK UNIFIED IDEOGRAPH-#", 0x31, "CJK_Ext_C"),
    c(0x2B740, Some(0x2B81D), "CJK UNIFIED IDEOGRAPH-#", 0x31, "CJK_Ext_D"),
    c(0x2B820, Some(0x2CEA1), "CJK UNIFIED IDEOGRAPH-#", 0x31, "CJK_Ext_E"),
    c(0x2CEB0, Some(0x2EBE0), "CJK UNIFIED IDEOGRAPH-#", 0x31, "CJK_Ext_F"),
    c(0x2F800, Some(0x2FA1D), "CJK COMPATIBILITY IDEOGRAPH-#", 0x31, "CJK_Compat_Ideographs_Sup"),
    c(0x30000, Some(0x3134A), "CJK UNIFIED IDEOGRAPH-#", 0x31, "CJK_Ext_G"),
    c(0xE0001, None, "LANGUAGE TAG", 0x08, "Tags"),
    c(0xE0020, None, "TAG SPACE", 0x00, "Tags"),
    c(0xE0021, None, "TAG EXCLAMATION MARK", 0x00, "Tags"),
    c(0xE0022, None, "TAG QUOTATION MARK", 0x00, "Tags"),
    c(0xE0023, None, "TAG NUMBER SIGN", 0x00, "Tags"),
    c(0xE0024, None, "TAG DOLLAR SIGN", 0x00, "Tags"),
    c(0xE0025, None, "TAG PERCENT SIGN", 0x00, "Tags"),
    c(0xE0026, None, "TAG AMPERSAND", 0x00, "Tags"),
    c(0xE0027, None, "TAG APOSTROPHE", 0x00, "Tags"),
    c(0xE0028, None, "TAG LEFT PARENTHESIS", 0x00, "Tags"),
    c(0xE0029, None, "TAG RIGHT PARENTHESIS", 0x00, "Tags"),
    c(0xE002A, None, "TAG ASTERISK", 0x00, "Tags"),
    c(0xE002B, None, "TAG PLUS SIGN", 0x00, "Tags"),
    c(0xE002C, None, "TAG COMMA", 0x00, "Tags"),
    c(0xE002D, None, "TAG HYPHEN-MINUS", 0x00, "Tags"),
    c(0xE002E, None, "TAG FULL STOP", 0x00, "Tags"),
    c(0xE002F, None, "TAG SOLIDUS", 0x00, "Tags"),
    c(0xE0030, None, "TAG DIGIT ZERO", 0x00, "Tags"),
    c(0xE0031, None, "TAG DIGIT ONE", 0x00, "Tags"),
    c(0xE0032, None, "TAG DIGIT TWO", 0x00, "Tags"),
    c(0xE0033, None, "TAG DIGIT THREE", 0x00, "Tags"),
    c(0xE0034, None, "TAG DIGIT FOUR", 0x00, "Tags"),
    c(0xE0035, None, "TAG DIGIT FIVE", 0x00, "Tags"),
    c(0xE0036, None, "TAG DIGIT SIX", 0x00, "Tags"),
    c(0xE0037, None, "TAG DIGIT SEVEN", 0x00, "Tags"),
    c(0xE0038, None, "TAG DIGIT EIGHT", 0x00, "Tags"),
    c(0xE0039, None, "TAG DIGIT NINE", 0x00, "Tags"),
    c(0xE003A, None, "TAG COLON", 0x00, "Tags"),
    c(0xE003B, None, "TAG SEMICOLON", 0x00, "Tags"),
    c(0xE003C, None, "TAG LESS-THAN SIGN", 0x00, "Tags"),
    c(0xE003D, None, "TAG EQUALS SIGN", 0x00, "Tags"),
    c(0xE003E, None, "TAG GREATER-THAN SIGN", 0x00, "Tags"),
    c(0xE003F, None, "TAG QUESTION MARK", 0x00, "Tags"),
    c(0xE0040, None, "TAG COMMERCIAL AT", 0x00, "Tags"),
    c(0xE0041, None, "TAG LATIN CAPITAL LETTER A", 0x00, "Tags"),
    c(0xE0042, None, "TAG LATIN CAPITAL LETTER B", 0x00, "Tags"),
    c(0xE0043, None, "TAG LATIN CAPITAL LETTER C", 0x00, "Tags"),
    c(0xE0044, None, "TAG LATIN CAPITAL LETTER D", 0x00, "Tags"),
    c(0xE0045, None, "TAG LATIN CAPITAL LETTER E", 0x00, "Tags"),
    c(0xE0046, None, "TAG LATIN CAPITAL LETTER F", 0x00, "Tags"),
    c(0xE0047, None, "TAG LATIN CAPITAL LETTER G", 0x00, "Tags"),
    c(0xE0048, None, "TAG LATIN CAPITAL LETTER H", 0x00, "Tags"),
    c(0xE0049, None, "TAG LATIN CAPITAL LETTER I", 0x00, "Tags"),
    c(0xE004A, None, "TAG LATIN CAPITAL LETTER J", 0x00, "Tags"),
    c(0xE004B, None, "TAG LATIN CAPITAL LETTER K", 0x00, "Tags"),
    c(0xE004C, None, "TAG LATIN CAPITAL LETTER L", 0x00, "Tags"),
    c(0xE004D, None, "TAG LATIN CAPITAL LETTER M", 0x00, "Tags"),
    c(0xE004E, None, "TAG LATIN CAPITAL LETTER N", 0x00, "Tags"),
    c(0xE004F, None, "TAG LATIN CAPITAL LETTER O", 0x00, "Tags"),
    c(0xE0050, None, "TAG LATIN CAPITAL LETTER P", 0x00, "Tags"),
    c(0xE0051, None, "TAG LATIN CAPITAL LETTER Q", 0x00, "Tags"),
    c(0xE0052, None, "TAG LATIN CAPITAL LETTER R", 0x00, "Tags"),
    c(0xE0053, None, "TAG LATIN CAPITAL LETTER S", 0x00, "Tags"),
    c(0xE0054, None, "TAG LATIN CAPITAL LETTER T", 0x00, "Tags"),
    c(0xE0055, None, "TAG LATIN CAPITAL LETTER U", 0x00, "Tags"),
    c(0xE0056, None, "TAG LATIN CAPITAL LETTER V", 0x00, "Tags"),
    c(0xE0057, None, "TAG LATIN CAPITAL LETTER W", 0x00, "Tags"),
    c(0xE0058, None, "TAG LATIN CAPITAL LETTER X", 0x00, "Tags"),
    c(0xE0059, None, "TAG LATIN CAPITAL LETTER Y", 0x00, "Tags"),
    c(0xE005A, None, "TAG LATIN CAPITAL LETTER Z", 0x00, "Tags"),
    c(0xE005B, None, "TAG LEFT SQUARE BRACKET", 0x00, "Tags"),
    c(0xE005C, None, "TAG REVERSE SOLIDUS", 0x00, "Tags"),
    c(0xE005D, None, "TAG RIGHT SQUARE BRACKET", 0x00, "Tags"),
    c(0xE005E, None, "TAG CIRCUMFLEX ACCENT", 0x00, "Tags"),
    c(0xE005F, None, "TAG LOW LINE", 0x00, "Tags"),
    c(0xE0060, None, "TAG GRAVE ACCENT", 0x00, "Tags"),
    c(0xE0061, None, "TAG LATIN SMALL LETTER A", 0x00, "Tags"),
    c(0xE0062, None, "TAG LATIN SMALL LETTER B", 0x00, "Tags"),
    c(0xE0063, None, "TAG LATIN SMALL LETTER C", 0x00, "Tags"),
    c(0xE0064, None, "TAG LATIN SMALL LETTER D", 0x00, "Tags"),
    c(0xE0065, None, "TAG LATIN SMALL LETTER E", 0x00, "Tags"),
    c(0xE0066, None, "TAG LATIN SMALL LETTER F", 0x00, "Tags"),
    c(0xE0067, None, "TAG LATIN SMALL LETTER G", 0x00, "Tags"),
    c(0xE0068, None, "TAG LATIN SMALL LETTER H", 0x00, "Tags"),
    c(0xE0069, None, "TAG LATIN SMALL LETTER I", 0x00, "Tags"),
    c(0xE006A, None, "TAG LATIN SMALL LETTER J", 0x00, "Tags"),
    c(0xE006B, None, "TAG LATIN SMALL LETTER K", 0x00, "Tags"),
    c(0xE006C, None, "TAG LATIN SMALL LETTER L", 0x00, "Tags"),
    c(0xE006D, None, "TAG LATIN SMALL LETTER M", 0x00, "Tags"),
    c(0xE006E, None, "TAG LATIN SMALL LETTER N", 0x00, "Tags"),
    c(0xE006F, None, "TAG LATIN SMALL LETTER O", 0x00, "Tags"),
    c(0xE0070, None, "TAG LATIN SMALL LETTER P", 0x00, "Tags"),
    c(0xE0071, None, "TAG LATIN SMALL LETTER Q", 0x00, "Tags"),
    c(0xE0072, None, "TAG LATIN SMALL LETTER R", 0x00, "Tags"),
    c(0xE0073, None, "TAG LATIN SMALL LETTER S", 0x00, "Tags"),
    c(0xE0074, None, "TAG LATIN SMALL LETTER T", 0x00, "Tags"),
    c(0xE0075, None, "TAG LATIN SMALL LETTER U", 0x00, "Tags"),
    c(0xE0076, None, "TAG LATIN SMALL LETTER V", 0x00, "Tags"),
    c(0xE0077, None, "TAG LATIN SMALL LETTER W", 0x00, "Tags"),
    c(0xE0078, None, "TAG LATIN SMALL LETTER X", 0x00, "Tags"),
    c(0xE0079, None, "TAG LATIN SMALL LETTER Y", 0x00, "Tags"),
    c(0xE007A, None, "TAG LATIN SMALL LETTER Z", 0x00, "Tags"),
    c(0xE007B, None, "TAG LEFT CURLY BRACKET", 0x00, "Tags"),
    c(0xE007C, None, "TAG VERTICAL LINE", 0x00, "Tags"),
    c(0xE007D, None, "TAG RIGHT CURLY BRACKET", 0x00, "Tags"),
    c(0xE007E, None, "TAG TILDE", 0x00, "Tags"),
    c(0xE007F, None, "CANCEL TAG", 0x00, "Tags"),
    c(0xE0100, None, "VARIATION SELECTOR-17", 0x20, "VS_Sup"),
    c(0xE0101, None, "VARIATION SELECTOR-18", 0x20, "VS_Sup"),
    c(0xE0102, None, "VARIATION SELECTOR-19", 0x20, "VS_Sup"),
    c(0xE0103, None, "VARIATION SELECTOR-20", 0x20, "VS_Sup"),
    c(0xE0104, None, "VARIATION SELECTOR-21", 0x20, "VS_Sup"),
    c(0xE0105, None, "VARIATION SELECTOR-22", 0x20, "VS_Sup"),
    c(0xE0106, None, "VARIATION SELECTOR-23", 0x20, "VS_Sup"),
    c(0xE0107, None, "VARIATION SELECTOR-24", 0x20, "VS_Sup"),
    c(0xE0108, None, "VARIATION SELECTOR-25", 0x20, "VS_Sup"),
    c(0xE0109, None, "VARIATION SELECTOR-26", 0x20, "VS_Sup"),
    c(0xE010A, None, "VARIATION SELECTOR-27", 0x20, "VS_Sup"),
    c(0xE010B, None, "VARIATION SELECTOR-28", 0x20, "VS_Sup"),
    c(0xE010C, None, "VARIATION SELECTOR-29", 0x20, "VS_Sup"),
    c(0xE010D, None, "VARIATION SELECTOR-30", 0x20, "VS_Sup"),
    c(0xE010E, None, "VARIATION SELECTOR-31", 0x20, "VS_Sup"),
    c(0xE010F, None, "VARIATION SELECTOR-32", 0x20, "VS_Sup"),
    c(0xE0110, None, "VARIATION SELECTOR-33", 0x20, "VS_Sup"),
    c(0xE0111, None, "VARIATION SELECTOR-34", 0x20, "VS_Sup"),
    c(0xE0112, None, "VARIATION SELECTOR-35", 0x20, "VS_Sup"),
    c(0xE0113, None, "VARIATION SELECTOR-36", 0x20, "VS_Sup"),
    c(0xE0114, None, "VARIATION SELECTOR-37", 0x20, "VS_Sup"),
    c(0xE0115, None, "VARIATION SELECTOR-38", 0x20, "VS_Sup"),
    c(0xE0116, None, "VARIATION SELECTOR-39", 0x20, "VS_Sup"),
    c(0xE0117, None, "VARIATION SELECTOR-40", 0x20, "VS_Sup"),
    c(0xE0118, None, "VARIATION SELECTOR-41", 0x20, "VS_Sup"),
    c(0xE0119, None, "VARIATION SELECTOR-42", 0x20, "VS_Sup"),
    c(0xE011A, None, "VARIATION SELECTOR-43", 0x20, "VS_Sup"),
    c(0xE011B, None, "VARIATION SELECTOR-44", 0x20, "VS_Sup"),
    c(0xE011C, None, "VARIATION SELECTOR-45", 0x20, "VS_Sup"),
    c(0xE011D, None, "VARIATION SELECTOR-46", 0x20, "VS_Sup"),
    c(0xE011E, None, "VARIATION SELECTOR-47", 0x20, "VS_Sup"),
    c(0xE011F, None, "VARIATION SELECTOR-48", 0x20, "VS_Sup"),
    c(0xE0120, None, "VARIATION SELECTOR-49", 0x20, "VS_Sup"),
    c(0xE0121, None, "VARIATION SELECTOR-50", 0x20, "VS_Sup"),
    c(0xE0122, None, "VARIATION SELECTOR-51", 0x20, "VS_Sup"),
    c(0xE0123, None, "VARIATION SELECTOR-52", 0x20, "VS_Sup"),
    c(0xE0124, None, "VARIATION SELECTOR-53", 0x20, "VS_Sup"),
    c(0xE0125, None, "VARIATION SELECTOR-54", 0x20, "VS_Sup"),
    c(0xE0126, None, "VARIATION SELECTOR-55", 0x20, "VS_Sup"),
    c(0xE0127, None, "VARIATION SELECTOR-56", 0x20, "VS_Sup"),
    c(0xE0128, None, "VARIATION SELECTOR-57", 0x20, "VS_Sup"),
    c(0xE0129, None, "VARIATION SELECTOR-58", 0x20, "VS_Sup"),
    c(0xE012A, None, "VARIATION SELECTOR-59", 0x20, "VS_Sup"),
    c(0xE012B, None, "VARIATION SELECTOR-60", 0x20, "VS_Sup"),
    c(0xE012C, None, "VARIATION SELECTOR-61", 0x20, "VS_Sup"),
    c(0xE012D, None, "VARIATION SELECTOR-62", 0x20, "VS_Sup"),
    c(0xE012E, None, "VARIATION SELECTOR-63", 0x20, "VS_Sup"),
    c(0xE012F, None, "VARIATION SELECTOR-64", 0x20, "VS_Sup"),
    c(0xE0130, None, "VARIATION SELECTOR-65", 0x20, "VS_Sup"),
    c(0xE0131, None, "VARIATION SELECTOR-66", 0x20, "VS_Sup"),
    c(0xE0132, None, "VARIATION SELECTOR-67", 0x20, "VS_Sup"),
    c(0xE0133, None, "VARIATION SELECTOR-68", 0x20, "VS_Sup"),
    c(0xE0134, None, "VARIATION SELECTOR-69", 0x20, "VS_Sup"),
    c(0xE0135, None, "VARIATION SELECTOR-70", 0x20, "VS_Sup"),
    c(0xE0136, None, "VARIATION SELECTOR-71", 0x20, "VS_Sup"),
    c(0xE0137, None, "VARIATION SELECTOR-72", 0x20, "VS_Sup"),
    c(0xE0138, None, "VARIATION SELECTOR-73", 0x20, "VS_Sup"),
    c(0xE0139, None, "VARIATION SELECTOR-74", 0x20, "VS_Sup"),
    c(0xE013A, None, "VARIATION SELECTOR-75", 0x20, "VS_Sup"),
    c(0xE013B, None, "VARIATION SELECTOR-76", 0x20, "VS_Sup"),
    c(0xE013C, None, "VARIATION SELECTOR-77", 0x20, "VS_Sup"),
    c(0xE013D, None, "VARIATION SELECTOR-78", 0x20, "VS_Sup"),
    c(0xE013E, None, "VARIATION SELECTOR-79", 0x20, "VS_Sup"),
    c(0xE013F, None, "VARIATION SELECTOR-80", 0x20, "VS_Sup"),
    c(0xE0140, None, "VARIATION SELECTOR-81", 0x20, "VS_Sup"),
    c(0xE0141, None, "VARIATION SELECTOR-82", 0x20, "VS_Sup"),
    c(0xE0142, None, "VARIATION SELECTOR-83", 0x20, "VS_Sup"),
    c(0xE0143, None, "VARIATION SELECTOR-84", 0x20, "VS_Sup"),
    c(0xE0144, None, "VARIATION SELECTOR-85", 0x20, "VS_Sup"),
    c(0xE0145, None, "VARIATION SELECTOR-86", 0x20, "VS_Sup"),
    c(0xE0146, None, "VARIATION SELECTOR-87", 0x20, "VS_Sup"),
    c(0xE0147, None, "VARIATION SELECTOR-88", 0x20, "VS_Sup"),
    c(0xE0148, None, "VARIATION SELECTOR-89", 0x20, "VS_Sup"),
    c(0xE0149, None, "VARIATION SELECTOR-90", 0x20, "VS_Sup"),
    c(0xE014A, None, "VARIATION SELECTOR-91", 0x20, "VS_Sup"),
    c(0xE014B, None, "VARIATION SELECTOR-92", 0x20, "VS_Sup"),
    c(0xE014C, None, "VARIATION SELECTOR-93", 0x20, "VS_Sup"),
    c(0xE014D, None, "VARIATION SELECTOR-94", 0x20, "VS_Sup"),
    c(0xE014E, None, "VARIATION SELECTOR-95", 0x20, "VS_Sup"),
    c(0xE014F, None, "VARIATION SELECTOR-96", 0x20, "VS_Sup"),
    c(0xE0150, None, "VARIATION SELECTOR-97", 0x20, "VS_Sup"),
    c(0xE0151, None, "VARIATION SELECTOR-98", 0x20, "VS_Sup"),
    c(0xE0152, None, "VARIATION SELECTOR-99", 0x20, "VS_Sup"),
    c(0xE0153, None, "VARIATION SELECTOR-100", 0x20, "VS_Sup"),
    c(0xE0154, None, "VARIATION SELECTOR-101", 0x20, "VS_Sup"),
    c(0xE0155, None, "VARIATION SELECTOR-102", 0x20, "VS_Sup"),
    c(0xE0156, None, "VARIATION SELECTOR-103", 0x20, "VS_Sup"),
    c(0xE0157, None, "VARIATION SELECTOR-104", 0x20, "VS_Sup"),
    c(0xE0158, None, "VARIATION SELECTOR-105", 0x20, "VS_Sup"),
    c(0xE0159, None, "VARIATION SELECTOR-106", 0x20, "VS_Sup"),
    c(0xE015A, None, "VARIATION SELECTOR-107", 0x20, "VS_Sup"),
    c(0xE015B, None, "VARIATION SELECTOR-108", 0x20, "VS_Sup"),
    c(0xE015C, None, "VARIATION SELECTOR-109", 0x20, "VS_Sup"),
    c(0xE015D, None, "VARIATION SELECTOR-110", 0x20, "VS_Sup"),
    c(0xE015E, None, "VARIATION SELECTOR-111", 0x20, "VS_Sup"),
    c(0xE015F, None, "VARIATION SELECTOR-112", 0x20, "VS_Sup"),
    c(0xE0160, None, "VARIATION SELECTOR-113", 0x20, "VS_Sup"),
    c(0xE0161, None, "VARIATION SELECTOR-114", 0x20, "VS_Sup"),
    c(0xE0162, None, "VARIATION SELECTOR-115", 0x20, "VS_Sup"),
    c(0xE0163, None, "VARIATION SELECTOR-116", 0x20, "VS_Sup"),
    c(0xE0164, None, "VARIATION SELECTOR-117", 0x20, "VS_Sup"),
    c(0xE0165, None, "VARIATION SELECTOR-118", 0x20, "VS_Sup"),
    c(0xE0166, None, "VARIATION SELECTOR-119", 0x20, "VS_Sup"),
    c(0xE0167, None, "VARIATION SELECTOR-120", 0x20, "VS_Sup"),
    c(0xE0168, None, "VARIATION SELECTOR-121", 0x20, "VS_Sup"),
    c(0xE0169, None, "VARIATION SELECTOR-122", 0x20, "VS_Sup"),
    c(0xE016A, None, "VARIATION SELECTOR-123", 0x20, "VS_Sup"),
    c(0xE016B, None, "VARIATION SELECTOR-124", 0x20, "VS_Sup"),
    c(0xE016C, None, "VARIATION SELECTOR-125", 0x20, "VS_Sup"),
    c(0xE016D, None, "VARIATION SELECTOR-126", 0x20, "VS_Sup"),
    c(0xE016E, None, "VARIATION SELECTOR-127", 0x20, "VS_Sup"),
    c(0xE016F, None, "VARIATION SELECTOR-128", 0x20, "VS_Sup"),
    c(0xE0170, None, "VARIATION SELECTOR-129", 0x20, "VS_Sup"),
    c(0xE0171, None, "VARIATION SELECTOR-130", 0x20, "VS_Sup"),
    c(0xE0172, None, "VARIATION SELECTOR-131", 0x20, "VS_Sup"),
    c(0xE0173, None, "VARIATION SELECTOR-132", 0x20, "VS_Sup"),
    c(0xE0174, None, "VARIATION SELECTOR-133", 0x20, "VS_Sup"),
    c(0xE0175, None, "VARIATION SELECTOR-134", 0x20, "VS_Sup"),
    c(0xE0176, None, "VARIATION SELECTOR-135", 0x20, "VS_Sup"),
    c(0xE0177, None, "VARIATION SELECTOR-136", 0x20, "VS_Sup"),
    c(0xE0178, None, "VARIATION SELECTOR-137", 0x20, "VS_Sup"),
    c(0xE0179, None, "VARIATION SELECTOR-138", 0x20, "VS_Sup"),
    c(0xE017A, None, "VARIATION SELECTOR-139", 0x20, "VS_Sup"),
    c(0xE017B, None, "VARIATION SELECTOR-140", 0x20, "VS_Sup"),
    c(0xE017C, None, "VARIATION SELECTOR-141", 0x20, "VS_Sup"),
    c(0xE017D, None, "VARIATION SELECTOR-142", 0x20, "VS_Sup"),
    c(0xE017E, None, "VARIATION SELECTOR-143", 0x20, "VS_Sup"),
    c(0xE017F, None, "VARIATION SELECTOR-144", 0x20, "VS_Sup"),
    c(0xE0180, None, "VARIATION SELECTOR-145", 0x20, "VS_Sup"),
    c(0xE0181, None, "VARIATION SELECTOR-146", 0x20, "VS_Sup"),
    c(0xE0182, None, "VARIATION SELECTOR-147", 0x20, "VS_Sup"),
    c(0xE0183, None, "VARIATION SELECTOR-148", 0x20, "VS_Sup"),
    c(0xE0184, None, "VARIATION SELECTOR-149", 0x20, "VS_Sup"),
    c(0xE0185, None, "VARIATION SELECTOR-150", 0x20, "VS_Sup"),
    c(0xE0186, None, "VARIATION SELECTOR-151", 0x20, "VS_Sup"),
    c(0xE0187, None, "VARIATION SELECTOR-152", 0x20, "VS_Sup"),
    c(0xE0188, None, "VARIATION SELECTOR-153", 0x20, "VS_Sup"),
    c(0xE0189, None, "VARIATION SELECTOR-154", 0x20, "VS_Sup"),
    c(0xE018A, None, "VARIATION SELECTOR-155", 0x20, "VS_Sup"),
    c(0xE018B, None, "VARIATION SELECTOR-156", 0x20, "VS_Sup"),
    c(0xE018C, None, "VARIATION SELECTOR-157", 0x20, "VS_Sup"),
    c(0xE018D, None, "VARIATION SELECTOR-158", 0x20, "VS_Sup"),
    c(0xE018E, None, "VARIATION SELECTOR-159", 0x20, "VS_Sup"),
    c(0xE018F, None, "VARIATION SELECTOR-160", 0x20, "VS_Sup"),
    c(0xE0190, None, "VARIATION SELECTOR-161", 0x20, "VS_Sup"),
    c(0xE0191, None, "VARIATION SELECTOR-162", 0x20, "VS_Sup"),
    c(0xE0192, None, "VARIATION SELECTOR-163", 0x20, "VS_Sup"),
    c(0xE0193, None, "VARIATION SELECTOR-164", 0x20, "VS_Sup"),
    c(0xE0194, None, "VARIATION SELECTOR-165", 0x20, "VS_Sup"),
    c(0xE0195, None, "VARIATION SELECTOR-166", 0x20, "VS_Sup"),
    c(0xE0196, None, "VARIATION SELECTOR-167", 0x20, "VS_Sup"),
    c(0xE0197, None, "VARIATION SELECTOR-168", 0x20, "VS_Sup"),
    c(0xE0198, None, "VARIATION SELECTOR-169", 0x20, "VS_Sup"),
    c(0xE0199, None, "VARIATION SELECTOR-170", 0x20, "VS_Sup"),
    c(0xE019A, None, "VARIATION SELECTOR-171", 0x20, "VS_Sup"),
    c(0xE019B, None, "VARIATION SELECTOR-172", 0x20, "VS_Sup"),
    c(0xE019C, None, "VARIATION SELECTOR-173", 0x20, "VS_Sup"),
    c(0xE019D, None, "VARIATION SELECTOR-174", 0x20, "VS_Sup"),
    c(0xE019E, None, "VARIATION SELECTOR-175", 0x20, "VS_Sup"),
    c(0xE019F, None, "VARIATION SELECTOR-176", 0x20, "VS_Sup"),
    c(0xE01A0, None, "VARIATION SELECTOR-177", 0x20, "VS_Sup"),
    c(0xE01A1, None, "VARIATION SELECTOR-178", 0x20, "VS_Sup"),
    c(0xE01A2, None, "VARIATION SELECTOR-179", 0x20, "VS_Sup"),
    c(0xE01A3, None, "VARIATION SELECTOR-180", 0x20, "VS_Sup"),
    c(0xE01A4, None, "VARIATION SELECTOR-181", 0x20, "VS_Sup"),
    c(0xE01A5, None, "VARIATION SELECTOR-182", 0x20, "VS_Sup"),
    c(0xE01A6, None, "VARIATION SELECTOR-183", 0x20, "VS_Sup"),
    c(0xE01A7, None, "VARIATION SELECTOR-184", 0x20, "VS_Sup"),
    c(0xE01A8, None, "VARIATION SELECTOR-185", 0x20, "VS_Sup"),
    c(0xE01A9, None, "VARIATION SELECTOR-186", 0x20, "VS_Sup"),
    c(0xE01AA, None, "VARIATION SELECTOR-187", 0x20, "VS_Sup"),
    c(0xE01AB, None, "VARIATION SELECTOR-188", 0x20, "VS_Sup"),
    c(0xE01AC, None, "VARIATION SELECTOR-189", 0x20, "VS_Sup"),
    c(0xE01AD, None, "VARIATION SELECTOR-190", 0x20, "VS_Sup"),
    c(0xE01AE, None, "VARIATION SELECTOR-191", 0x20, "VS_Sup"),
    c(0xE01AF, None, "VARIATION SELECTOR-192", 0x20, "VS_Sup"),
    c(0xE01B0, None, "VARIATION SELECTOR-193", 0x20, "VS_Sup"),
    c(0xE01B1, None, "VARIATION SELECTOR-194", 0x20, "VS_Sup"),
    c(0xE01B2, None, "VARIATION SELECTOR-195", 0x20, "VS_Sup"),
    c(0xE01B3, None, "VARIATION SELECTOR-196", 0x20, "VS_Sup"),
    c(0xE01B4, None, "VARIATION SELECTOR-197", 0x20, "VS_Sup"),
    c(0xE01B5, None, "VARIATION SELECTOR-198", 0x20, "VS_Sup"),
    c(0xE01B6, None, "VARIATION SELECTOR-199", 0x20, "VS_Sup"),
    c(0xE01B7, None, "VARIATION SELECTOR-200", 0x20, "VS_Sup"),
    c(0xE01B8, None, "VARIATION SELECTOR-201", 0x20, "VS_Sup"),
    c(0xE01B9, None, "VARIATION SELECTOR-202", 0x20, "VS_Sup"),
    c(0xE01BA, None, "VARIATION SELECTOR-203", 0x20, "VS_Sup"),
    c(0xE01BB, None, "VARIATION SELECTOR-204", 0x20, "VS_Sup"),
    c(0xE01BC, None, "VARIATION SELECTOR-205", 0x20, "VS_Sup"),
    c(0xE01BD, None, "VARIATION SELECTOR-206", 0x20, "VS_Sup"),
    c(0xE01BE, None, "VARIATION SELECTOR-207", 0x20, "VS_Sup"),
    c(0xE01BF, None, "VARIATION SELECTOR-208", 0x20, "VS_Sup"),
    c(0xE01C0, None, "VARIATION SELECTOR-209", 0x20, "VS_Sup"),
    c(0xE01C1, None, "VARIATION SELECTOR-210", 0x20, "VS_Sup"),
    c(0xE01C2, None, "VARIATION SELECTOR-211", 0x20, "VS_Sup"),
    c(0xE01C3, None, "VARIATION SELECTOR-212", 0x20, "VS_Sup"),
    c(0xE01C4, None, "VARIATION SELECTOR-213", 0x20, "VS_Sup"),
    c(0xE01C5, None, "VARIATION SELECTOR-214", 0x20, "VS_Sup"),
    c(0xE01C6, None, "VARIATION SELECTOR-215", 0x20, "VS_Sup"),
    c(0xE01C7, None, "VARIATION SELECTOR-216", 0x20, "VS_Sup"),
    c(0xE01C8, None, "VARIATION SELECTOR-217", 0x20, "VS_Sup"),
    c(0xE01C9, None, "VARIATION SELECTOR-218", 0x20, "VS_Sup"),
    c(0xE01CA, None, "VARIATION SELECTOR-219", 0x20, "VS_Sup"),
    c(0xE01CB, None, "VARIATION SELECTOR-220", 0x20, "VS_Sup"),
    c(0xE01CC, None, "VARIATION SELECTOR-221", 0x20, "VS_Sup"),
    c(0xE01CD, None, "VARIATION SELECTOR-222", 0x20, "VS_Sup"),
    c(0xE01CE, None, "VARIATION SELECTOR-223", 0x20, "VS_Sup"),
    c(0xE01CF, None, "VARIATION SELECTOR-224", 0x20, "VS_Sup"),
    c(0xE01D0, None, "VARIATION SELECTOR-225", 0x20, "VS_Sup"),
    c(0xE01D1, None, "VARIATION SELECTOR-226", 0x20, "VS_Sup"),
    c(0xE01D2, None, "VARIATION SELECTOR-227", 0x20, "VS_Sup"),
    c(0xE01D3, None, "VARIATION SELECTOR-228", 0x20, "VS_Sup"),
    c(0xE01D4, None, "VARIATION SELECTOR-229", 0x20, "VS_Sup"),
    c(0xE01D5, None, "VARIATION SELECTOR-230", 0x20, "VS_Sup"),
    c(0xE01D6, None, "VARIATION SELECTOR-231", 0x20, "VS_Sup"),
    c(0xE01D7, None, "VARIATION SELECTOR-232", 0x20, "VS_Sup"),
    c(0xE01D8, None, "VARIATION SELECTOR-233", 0x20, "VS_Sup"),
    c(0xE01D9, None, "VARIATION SELECTOR-234", 0x20, "VS_Sup"),
    c(0xE01DA, None, "VARIATION SELECTOR-235", 0x20, "VS_Sup"),
    c(0xE01DB, None, "VARIATION SELECTOR-236", 0x20, "VS_Sup"),
    c(0xE01DC, None, "VARIATION SELECTOR-237", 0x20, "VS_Sup"),
    c(0xE01DD, None, "VARIATION SELECTOR-238", 0x20, "VS_Sup"),
    c(0xE01DE, None, "VARIATION SELECTOR-239", 0x20, "VS_Sup"),
    c(0xE01DF, None, "VARIATION SELECTOR-240", 0x20, "VS_Sup"),
    c(0xE01E0, None, "VARIATION SELECTOR-241", 0x20, "VS_Sup"),
    c(0xE01E1, None, "VARIATION SELECTOR-242", 0x20, "VS_Sup"),
    c(0xE01E2, None, "VARIATION SELECTOR-243", 0x20, "VS_Sup"),
    c(0xE01E3, None, "VARIATION SELECTOR-244", 0x20, "VS_Sup"),
    c(0xE01E4, None, "VARIATION SELECTOR-245", 0x20, "VS_Sup"),
    c(0xE01E5, None, "VARIATION SELECTOR-246", 0x20, "VS_Sup"),
    c(0xE01E6, None, "VARIATION SELECTOR-247", 0x20, "VS_Sup"),
    c(0xE01E7, None, "VARIATION SELECTOR-248", 0x20, "VS_Sup"),
    c(0xE01E8, None, "VARIATION SELECTOR-249", 0x20, "VS_Sup"),
    c(0xE01E9, None, "VARIATION SELECTOR-250", 0x20, "VS_Sup"),
    c(0xE01EA, None, "VARIATION SELECTOR-251", 0x20, "VS_Sup"),
    c(0xE01EB, None, "VARIATION SELECTOR-252", 0x20, "VS_Sup"),
    c(0xE01EC, None, "VARIATION SELECTOR-253", 0x20, "VS_Sup"),
    c(0xE01ED, None, "VARIATION SELECTOR-254", 0x20, "VS_Sup"),
    c(0xE01EE, None, "VARIATION SELECTOR-255", 0x20, "VS_Sup"),
    c(0xE01EF, None, "VARIATION SELECTOR-256", 0x20, "VS_Sup"),
    c(0xF0000, Some(0xFFFFD), "", 0x00, "Sup_PUA_A"),
    c(0x100000, Some(0x10FFFD), "", 0x00, "Sup_PUA_B"),
];
