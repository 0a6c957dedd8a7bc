// Generated from the Unicode Character Database 14.0.0. Do not edit by hand.

use super::b;
use crate::tables::BlockEntry;

/// Unicode blocks, sorted by first code point.
///
/// Fields: long name, short alias, first code point, last code point.
pub static BLOCKS: &[BlockEntry] = &[
    b("Basic Latin", "ASCII", 0x0000, 0x007F),
    b("Latin-1 Supplement", "Latin_1_Sup", 0x0080, 0x00FF),
    b("Latin Extended-A", "Latin_Ext_A", 0x0100, 0x017F),
    b("Latin Extended-B", "Latin_Ext_B", 0x0180, 0x024F),
    b("IPA Extensions", "IPA_Ext", 0x0250, 0x02AF),
    b("Spacing Modifier Letters", "Modifier_Letters", 0x02B0, 0x02FF),
    b("Combining Diacritical Marks", "Diacriticals", 0x0300, 0x036F),
    b("Greek and Coptic", "Greek", 0x0370, 0x03FF),
    b("Cyrillic", "Cyrillic", 0x0400, 0x04FF),
    b("Cyrillic Supplement", "Cyrillic_Sup", 0x0500, 0x052F),
    b("Armenian", "Armenian", 0x0530, 0x058F),
    b("Hebrew", "Hebrew", 0x0590, 0x05FF),
    b("Arabic", "Arabic", 0x0600, 0x06FF),
    b("Syriac", "Syriac", 0x0700, 0x074F),
    b("Arabic Supplement", "Arabic_Sup", 0x0750, 0x077F),
    b("Thaana", "Thaana", 0x0780, 0x07BF),
    b("NKo", "NKo", 0x07C0, 0x07FF),
    b("Samaritan", "Samaritan", 0x0800, 0x083F),
    b("Mandaic", "Mandaic", 0x0840, 0x085F),
    b("Syriac Supplement", "Syriac_Sup", 0x0860, 0x086F),
    b("Arabic Extended-B", "Arabic_Ext_B", 0x0870, 0x089F),
    b("Arabic Extended-A", "Arabic_Ext_A", 0x08A0, 0x08FF),
    b("Devanagari", "Devanagari", 0x0900, 0x097F),
    b("Bengali", "Bengali", 0x0980, 0x09FF),
    b("Gurmukhi", "Gurmukhi", 0x0A00, 0x0A7F),
    b("Gujarati", "Gujarati", 0x0A80, 0x0AFF),
    b("Oriya", "Oriya", 0x0B00, 0x0B7F),
    b("Tamil", "Tamil", 0x0B80, 0x0BFF),
    b("Telugu", "Telugu", 0x0C00, 0x0C7F),
    b("Kannada", "Kannada", 0x0C80, 0x0CFF),
    b("Malayalam", "Malayalam", 0x0D00, 0x0D7F),
    b("Sinhala", "Sinhala", 0x0D80, 0x0DFF),
    b("Thai", "Thai", 0x0E00, 0x0E7F),
    b("Lao", "Lao", 0x0E80, 0x0EFF),
    b("Tibetan", "Tibetan", 0x0F00, 0x0FFF),
    b("Myanmar", "Myanmar", 0x1000, 0x109F),
    b("Georgian", "Georgian", 0x10A0, 0x10FF),
    b("Hangul Jamo", "Jamo", 0x1100, 0x11FF),
    b("Ethiopic", "Ethiopic", 0x1200, 0x137F),
    b("Ethiopic Supplement", "Ethiopic_Sup", 0x1380, 0x139F),
    b("Cherokee", "Cherokee", 0x13A0, 0x13FF),
    b("Unified Canadian Aboriginal Syllabics", "UCAS", 0x1400, 0x167F),
    b("Ogham", "Ogham", 0x1680, 0x169F),
    b("Runic", "Runic", 0x16A0, 0x16FF),
    b("Tagalog", "Tagalog", 0x1700, 0x171F),
    b("Hanunoo", "Hanunoo", 0x1720, 0x173F),
    b("Buhid", "Buhid", 0x1740, 0x175F),
    b("Tagbanwa", "Tagbanwa", 0x1760, 0x177F),
    b("Khmer", "Khmer", 0x1780, 0x17FF),
    b("Mongolian", "Mongolian", 0x1800, 0x18AF),
    b("Unified Canadian Aboriginal Syllabics Extended", "UCAS_Ext", 0x18B0, 0x18FF),
    b("Limbu", "Limbu", 0x1900, 0x194F),
    b("Tai Le", "Tai_Le", 0x1950, 0x197F),
    b("New Tai Lue", "New_Tai_Lue", 0x1980, 0x19DF),
    b("Khmer Symbols", "Khmer_Symbols", 0x19E0, 0x19FF),
    b("Buginese", "Buginese", 0x1A00, 0x1A1F),
    b("Tai Tham", "Tai_Tham", 0x1A20, 0x1AAF),
    b("Combining Diacritical Marks Extended", "Diacriticals_Ext", 0x1AB0, 0x1AFF),
    b("Balinese", "Balinese", 0x1B00, 0x1B7F),
    b("Sundanese", "Sundanese", 0x1B80, 0x1BBF),
    b("Batak", "Batak", 0x1BC0, 0x1BFF),
    b("Lepcha", "Lepcha", 0x1C00, 0x1C4F),
    b("Ol Chiki", "Ol_Chiki", 0x1C50, 0x1C7F),
    b("Cyrillic Extended-C", "Cyrillic_Ext_C", 0x1C80, 0x1C8F),
    b("Georgian Extended", "Georgian_Ext", 0x1C90, 0x1CBF),
    b("Sundanese Supplement", "Sundanese_Sup", 0x1CC0, 0x1CCF),
    b("Vedic Extensions", "Vedic_Ext", 0x1CD0, 0x1CFF),
    b("Phonetic Extensions", "Phonetic_Ext", 0x1D00, 0x1D7F),
    b("Phonetic Extensions Supplement", "Phonetic_Ext_Sup", 0x1D80, 0x1DBF),
    b("Combining Diacritical Marks Supplement", "Diacriticals_Sup", 0x1DC0, 0x1DFF),
    b("Latin Extended Additional", "Latin_Ext_Additional", 0x1E00, 0x1EFF),
    b("Greek Extended", "Greek_Ext", 0x1F00, 0x1FFF),
    b("General Punctuation", "Punctuation", 0x2000, 0x206F),
    b("Superscripts and Subscripts", "Super_And_Sub", 0x2070, 0x209F),
    b("Currency Symbols", "Currency_Symbols", 0x20A0, 0x20CF),
    b("Combining Diacritical Marks for Symbols", "Diacriticals_For_Symbols", 0x20D0, 0x20FF),
    b("Letterlike Symbols", "Letterlike_Symbols", 0x2100, 0x214F),
    b("Number Forms", "Number_Forms", 0x2150, 0x218F),
    b("Arrows", "Arrows", 0x2190, 0x21FF),
    b("Mathematical Operators", "Math_Operators", 0x2200, 0x22FF),
    b("Miscellaneous Technical", "Misc_Technical", 0x2300, 0x23FF),
    b("Control Pictures", "Control_Pictures", 0x2400, 0x243F),
    b("Optical Character Recognition", "OCR", 0x2440, 0x245F),
    b("Enclosed Alphanumerics", "Enclosed_Alphanum", 0x2460, 0x24FF),
    b("Box Drawing", "Box_Drawing", 0x2500, 0x257F),
    b("Block Elements", "Block_Elements", 0x2580, 0x259F),
    b("Geometric Shapes", "Geometric_Shapes", 0x25A0, 0x25FF),
    b("Miscellaneous Symbols", "Misc_Symbols", 0x2600, 0x26FF),
    b("Dingbats", "Dingbats", 0x2700, 0x27BF),
    b("Miscellaneous Mathematical Symbols-A", "Misc_Math_Symbols_A", 0x27C0, 0x27EF),
    b("Supplemental Arrows-A", "Sup_Arrows_A", 0x27F0, 0x27FF),
    b("Braille Patterns", "Braille", 0x2800, 0x28FF),
    b("Supplemental Arrows-B", "Sup_Arrows_B", 0x2900, 0x297F),
    b("Miscellaneous Mathematical Symbols-B", "Misc_Math_Symbols_B", 0x2980, 0x29FF),
    b("Supplemental Mathematical Operators", "Sup_Math_Operators", 0x2A00, 0x2AFF),
    b("Miscellaneous Symbols and Arrows", "Misc_Arrows", 0x2B00, 0x2BFF),
    b("Glagolitic", "Glagolitic", 0x2C00, 0x2C5F),
    b("Latin Extended-C", "Latin_Ext_C", 0x2C60, 0x2C7F),
    b("Coptic", "Coptic", 0x2C80, 0x2CFF),
    b("Georgian Supplement", "Georgian_Sup", 0x2D00, 0x2D2F),
    b("Tifinagh", "Tifinagh", 0x2D30, 0x2D7F),
    b("Ethiopic Extended", "Ethiopic_Ext", 0x2D80, 0x2DDF),
    b("Cyrillic Extended-A", "Cyrillic_Ext_A", 0x2DE0, 0x2DFF),
    b("Supplemental Punctuation", "Sup_Punctuation", 0x2E00, 0x2E7F),
    b("CJK Radicals Supplement", "CJK_Radicals_Sup", 0x2E80, 0x2EFF),
    b("Kangxi Radicals", "Kangxi", 0x2F00, 0x2FDF),
    b("Ideographic Description Characters", "IDC", 0x2FF0, 0x2FFF),
    b("CJK Symbols and Punctuation", "CJK_Symbols", 0x3000, 0x303F),
    b("Hiragana", "Hiragana", 0x3040, 0x309F),
    b("Katakana", "Katakana", 0x30A0, 0x30FF),
    b("Bopomofo", "Bopomofo", 0x3100, 0x312F),
    b("Hangul Compatibility Jamo", "Compat_Jamo", 0x3130, 0x318F),
    b("Kanbun", "Kanbun", 0x3190, 0x319F),
    b("Bopomofo Extended", "Bopomofo_Ext", 0x31A0, 0x31BF),
    b("CJK Strokes", "CJK_Strokes", 0x31C0, 0x31EF),
    b("Katakana Phonetic Extensions", "Katakana_Ext", 0x31F0, 0x31FF),
    b("Enclosed CJK Letters and Months", "Enclosed_CJK", 0x3200, 0x32FF),
    b("CJK Compatibility", "CJK_Compat", 0x3300, 0x33FF),
    b("CJK Unified Ideographs Extension A", "CJK_Ext_A", 0x3400, 0x4DBF),
    b("Yijing Hexagram Symbols", "Yijing", 0x4DC0, 0x4DFF),
    b("CJK Unified Ideographs", "CJK", 0x4E00, 0x9FFF),
    b("Yi Syllables", "Yi_Syllables", 0xA000, 0xA48F),
    b("Yi Radicals", "Yi_Radicals", 0xA490, 0xA4CF),
    b("Lisu", "Lisu", 0xA4D0, 0xA4FF),
    b("Vai", "Vai", 0xA500, 0xA63F),
    b("Cyrillic Extended-B", "Cyrillic_Ext_B", 0xA640, 0xA69F),
    b("Bamum", "Bamum", 0xA6A0, 0xA6FF),
    b("Modifier Tone Letters", "Modifier_Tone_Letters", 0xA700, 0xA71F),
    b("Latin Extended-D", "Latin_Ext_D", 0xA720, 0xA7FF),
    b("Syloti Nagri", "Syloti_Nagri", 0xA800, 0xA82F),
    b("Common Indic Number Forms", "Indic_Number_Forms", 0xA830, 0xA83F),
    b("Phags-pa", "Phags_Pa", 0xA840, 0xA87F),
    b("Saurashtra", "Saurashtra", 0xA880, 0xA8DF),
    b("Devanagari Extended", "Devanagari_Ext", 0xA8E0, 0xA8FF),
    b("Kayah Li", "Kayah_Li", 0xA900, 0xA92F),
    b("Rejang", "Rejang", 0xA930, 0xA95F),
    b("Hangul Jamo Extended-A", "Jamo_Ext_A", 0xA960, 0xA97F),
    b("Javanese", "Javanese", 0xA980, 0xA9DF),
    b("Myanmar Extended-B", "Myanmar_Ext_B", 0xA9E0, 0xA9FF),
    b("Cham", "Cham", 0xAA00, 0xAA5F),
    b("Myanmar Extended-A", "Myanmar_Ext_A", 0xAA60, 0xAA7F),
    b("Tai Viet", "Tai_Viet", 0xAA80, 0xAADF),
    b("Meetei Mayek Extensions", "Meetei_Mayek_Ext", 0xAAE0, 0xAAFF),
    b("Ethiopic Extended-A", "Ethiopic_Ext_A", 0xAB00, 0xAB2F),
    b("Latin Extended-E", "Latin_Ext_E", 0xAB30, 0xAB6F),
    b("Cherokee Supplement", "Cherokee_Sup", 0xAB70, 0xABBF),
    b("Meetei Mayek", "Meetei_Mayek", 0xABC0, 0xABFF),
    b("Hangul Syllables", "Hangul", 0xAC00, 0xD7AF),
    b("Hangul Jamo Extended-B", "Jamo_Ext_B", 0xD7B0, 0xD7FF),
    b("High Surrogates", "High_Surrogates", 0xD800, 0xDB7F),
    b("High Private Use Surrogates", "High_PU_Surrogates", 0xDB80, 0xDBFF),
    b("Low Surrogates", "Low_Surrogates", 0xDC00, 0xDFFF),
    b("Private Use Area", "PUA", 0xE000, 0xF8FF),
    b("CJK Compatibility Ideographs", "CJK_Compat_Ideographs", 0xF900, 0xFAFF),
    b("Alphabetic Presentation Forms", "Alphabetic_PF", 0xFB00, 0xFB4F),
    b("Arabic Presentation Forms-A", "Arabic_PF_A", 0xFB50, 0xFDFF),
    b("Variation Selectors", "VS", 0xFE00, 0xFE0F),
    b("Vertical Forms", "Vertical_Forms", 0xFE10, 0xFE1F),
    b("Combining Half Marks", "Half_Marks", 0xFE20, 0xFE2F),
    b("CJK Compatibility Forms", "CJK_Compat_Forms", 0xFE30, 0xFE4F),
    b("Small Form Variants", "Small_Forms", 0xFE50, 0xFE6F),
    b("Arabic Presentation Forms-B", "Arabic_PF_B", 0xFE70, 0xFEFF),
    b("Halfwidth and Fullwidth Forms", "Half_And_Full_Forms", 0xFF00, 0xFFEF),
    b("Specials", "Specials", 0xFFF0, 0xFFFF),
    b("Linear B Syllabary", "Linear_B_Syllabary", 0x10000, 0x1007F),
    b("Linear B Ideograms", "Linear_B_Ideograms", 0x10080, 0x100FF),
    b("Aegean Numbers", "Aegean_Numbers", 0x10100, 0x1013F),
    b("Ancient Greek Numbers", "Ancient_Greek_Numbers", 0x10140, 0x1018F),
    b("Ancient Symbols", "Ancient_Symbols", 0x10190, 0x101CF),
    b("Phaistos Disc", "Phaistos", 0x101D0, 0x101FF),
    b("Lycian", "Lycian", 0x10280, 0x1029F),
    b("Carian", "Carian", 0x102A0, 0x102DF),
    b("Coptic Epact Numbers", "Coptic_Epact_Numbers", 0x102E0, 0x102FF),
    b("Old Italic", "Old_Italic", 0x10300, 0x1032F),
    b("Gothic", "Gothic", 0x10330, 0x1034F),
    b("Old Permic", "Old_Permic", 0x10350, 0x1037F),
    b("Ugaritic", "Ugaritic", 0x10380, 0x1039F),
    b("Old Persian", "Old_Persian", 0x103A0, 0x103DF),
    b("Deseret", "Deseret", 0x10400, 0x1044F),
    b("Shavian", "Shavian", 0x10450, 0x1047F),
    b("Osmanya", "Osmanya", 0x10480, 0x104AF),
    b("Osage", "Osage", 0x104B0, 0x104FF),
    b("Elbasan", "Elbasan", 0x10500, 0x1052F),
    b("Caucasian Albanian", "Caucasian_Albanian", 0x10530, 0x1056F),
    b("Vithkuqi", "Vithkuqi", 0x10570, 0x105BF),
    b("Linear A", "Linear_A", 0x10600, 0x1077F),
    b("Latin Extended-F", "Latin_Ext_F", 0x10780, 0x107BF),
    b("Cypriot Syllabary", "Cypriot_Syllabary", 0x10800, 0x1083F),
    b("Imperial Aramaic", "Imperial_Aramaic", 0x10840, 0x1085F),
    b("Palmyrene", "Palmyrene", 0x10860, 0x1087F),
    b("Nabataean", "Nabataean", 0x10880, 0x108AF),
    b("Hatran", "Hatran", 0x108E0, 0x108FF),
    b("Phoenician", "Phoenician", 0x10900, 0x1091F),
    b("Lydian", "Lydian", 0x10920, 0x1093F),
    b("Meroitic Hieroglyphs", "Meroitic_Hieroglyphs", 0x10980, 0x1099F),
    b("Meroitic Cursive", "Meroitic_Cursive", 0x109A0, 0x109FF),
    b("Kharoshthi", "Kharoshthi", 0x10A00, 0x10A5F),
    b("Old South Arabian", "Old_South_Arabian", 0x10A60, 0x10A7F),
    b("Old North Arabian", "Old_North_Arabian", 0x10A80, 0x10A9F),
    b("Manichaean", "Manichaean", 0x10AC0, 0x10AFF),
    b("Avestan", "Avestan", 0x10B00, 0x10B3F),
    b("Inscriptional Parthian", "Inscriptional_Parthian", 0x10B40, 0x10B5F),
    b("Inscriptional Pahlavi", "Inscriptional_Pahlavi", 0x10B60, 0x10B7F),
    b("Psalter Pahlavi", "Psalter_Pahlavi", 0x10B80, 0x10BAF),
    b("Old Turkic", "Old_Turkic", 0x10C00, 0x10C4F),
    b("Old Hungarian", "Old_Hungarian", 0x10C80, 0x10CFF),
    b("Hanifi Rohingya", "Hanifi_Rohingya", 0x10D00, 0x10D3F),
    b("Rumi Numeral Symbols", "Rumi", 0x10E60, 0x10E7F),
    b("Yezidi", "Yezidi", 0x10E80, 0x10EBF),
    b("Old Sogdian", "Old_Sogdian", 0x10F00, 0x10F2F),
    b("Sogdian", "Sogdian", 0x10F30, 0x10F6F),
    b("Old Uyghur", "Old_Uyghur", 0x10F70, 0x10FAF),
    b("Chorasmian", "Chorasmian", 0x10FB0, 0x10FDF),
    b("Elymaic", "Elymaic", 0x10FE0, 0x10FFF),
    b("Brahmi", "Brahmi", 0x11000, 0x1107F),
    b("Kaithi", "Kaithi", 0x11080, 0x110CF),
    b("Sora Sompeng", "Sora_Sompeng", 0x110D0, 0x110FF),
    b("Chakma", "Chakma", 0x11100, 0x1114F),
    b("Mahajani", "Mahajani", 0x11150, 0x1117F),
    b("Sharada", "Sharada", 0x11180, 0x111DF),
    b("Sinhala Archaic Numbers", "Sinhala_Archaic_Numbers", 0x111E0, 0x111FF),
    b("Khojki", "Khojki", 0x11200, 0x1124F),
    b("Multani", "Multani", 0x11280, 0x112AF),
    b("Khudawadi", "Khudawadi", 0x112B0, 0x112FF),
    b("Grantha", "Grantha", 0x11300, 0x1137F),
    b("Newa", "Newa", 0x11400, 0x1147F),
    b("Tirhuta", "Tirhuta", 0x11480, 0x114DF),
    b("Siddham", "Siddham", 0x11580, 0x115FF),
    b("Modi", "Modi", 0x11600, 0x1165F),
    b("Mongolian Supplement", "Mongolian_Sup", 0x11660, 0x1167F),
    b("Takri", "Takri", 0x11680, 0x116CF),
    b("Ahom", "Ahom", 0x11700, 0x1174F),
    b("Dogra", "Dogra", 0x11800, 0x1184F),
    b("Warang Citi", "Warang_Citi", 0x118A0, 0x118FF),
    b("Dives Akuru", "Dives_Akuru", 0x11900, 0x1195F),
    b("Nandinagari", "Nandinagari", 0x119A0, 0x119FF),
    b("Zanabazar Square", "Zanabazar_Square", 0x11A00, 0x11A4F),
    b("Soyombo", "Soyombo", 0x11A50, 0x11AAF),
    b("Unified Canadian Aboriginal Syllabics Extended-A", "UCAS_Ext_A", 0x11AB0, 0x11ABF),
    b("Pau Cin Hau", "Pau_Cin_Hau", 0x11AC0, 0x11AFF),
    b("Bhaiksuki", "Bhaiksuki", 0x11C00, 0x11C6F),
    b("Marchen", "Marchen", 0x11C70, 0x11CBF),
    b("Masaram Gondi", "Masaram_Gondi", 0x11D00, 0x11D5F),
    b("Gunjala Gondi", "Gunjala_Gondi", 0x11D60, 0x11DAF),
    b("Makasar", "Makasar", 0x11EE0, 0x11EFF),
    b("Lisu Supplement", "Lisu_Sup", 0x11FB0, 0x11FBF),
    b("Tamil Supplement", "Tamil_Sup", 0x11FC0, 0x11FFF),
    b("Cuneiform", "Cuneiform", 0x12000, 0x123FF),
    b("Cuneiform Numbers and Punctuation", "Cuneiform_Numbers", 0x12400, 0x1247F),
    b("Early Dynastic Cuneiform", "Early_Dynastic_Cuneiform", 0x12480, 0x1254F),
    b("Cypro-Minoan", "Cypro_Minoan", 0x12F90, 0x12FFF),
    b("Egyptian Hieroglyphs", "Egyptian_Hieroglyphs", 0x13000, 0x1342F),
    b("Egyptian Hieroglyph Format Controls", "Egyptian_Hieroglyph_Format_Controls", 0x13430, 0x1343F),
    b("Anatolian Hieroglyphs", "Anatolian_Hieroglyphs", 0x14400, 0x1467F),
    b("Bamum Supplement", "Bamum_Sup", 0x16800, 0x16A3F),
    b("Mro", "Mro", 0x16A40, 0x16A6F),
    b("Tangsa", "Tangsa", 0x16A70, 0x16ACF),
    b("Bassa Vah", "Bassa_Vah", 0x16AD0, 0x16AFF),
    b("Pahawh Hmong", "Pahawh_Hmong", 0x16B00, 0x16B8F),
    b("Medefaidrin", "Medefaidrin", 0x16E40, 0x16E9F),
    b("Miao", "Miao", 0x16F00, 0x16F9F),
    b("Ideographic Symbols and Punctuation", "Ideographic_Symbols", 0x16FE0, 0x16FFF),
    b("Tangut", "Tangut", 0x17000, 0x187FF),
    b("Tangut Components", "Tangut_Components", 0x18800, 0x18AFF),
    b("Khitan Small Script", "Khitan_Small_Script", 0x18B00, 0x18CFF),
    b("Tangut Supplement", "Tangut_Sup", 0x18D00, 0x18D7F),
    b("Kana Extended-B", "Kana_Ext_B", 0x1AFF0, 0x1AFFF),
    b("Kana Supplement", "Kana_Sup", 0x1B000, 0x1B0FF),
    b("Kana Extended-A", "Kana_Ext_A", 0x1B100, 0x1B12F),
    b("Small Kana Extension", "Small_Kana_Ext", 0x1B130, 0x1B16F),
    b("Nushu", "Nushu", 0x1B170, 0x1B2FF),
    b("Duployan", "Duployan", 0x1BC00, 0x1BC9F),
    b("Shorthand Format Controls", "Shorthand_Format_Controls", 0x1BCA0, 0x1BCAF),
    b("Znamenny Musical Notation", "Znamenny_Music", 0x1CF00, 0x1CFCF),
    b("Byzantine Musical Symbols", "Byzantine_Music", 0x1D000, 0x1D0FF),
    b("Musical Symbols", "Music", 0x1D100, 0x1D1FF),
    b("Ancient Greek Musical Notation", "Ancient_Greek_Music", 0x1D200, 0x1D24F),
    b("Mayan Numerals", "Mayan_Numerals", 0x1D2E0, 0x1D2FF),
    b("Tai Xuan Jing Symbols", "Tai_Xuan_Jing", 0x1D300, 0x1D35F),
    b("Counting Rod Numerals", "Counting_Rod", 0x1D360, 0x1D37F),
    b("Mathematical Alphanumeric Symbols", "Math_Alphanum", 0x1D400, 0x1D7FF),
    b("Sutton SignWriting", "Sutton_SignWriting", 0x1D800, 0x1DAAF),
    b("Latin Extended-G", "Latin_Ext_G", 0x1DF00, 0x1DFFF),
    b("Glagolitic Supplement", "Glagolitic_Sup", 0x1E000, 0x1E02F),
    b("Nyiakeng Puachue Hmong", "Nyiakeng_Puachue_Hmong", 0x1E100, 0x1E14F),
    b("Toto", "Toto", 0x1E290, 0x1E2BF),
    b("Wancho", "Wancho", 0x1E2C0, 0x1E2FF),
    b("Ethiopic Extended-B", "Ethiopic_Ext_B", 0x1E7E0, 0x1E7FF),
    b("Mende Kikakui", "Mende_Kikakui", 0x1E800, 0x1E8DF),
    b("Adlam", "Adlam", 0x1E900, 0x1E95F),
    b("Indic Siyaq Numbers", "Indic_Siyaq_Numbers", 0x1EC70, 0x1ECBF),
    b("Ottoman Siyaq Numbers", "Ottoman_Siyaq_Numbers", 0x1ED00, 0x1ED4F),
    b("Arabic Mathematical Alphabetic Symbols", "Arabic_Math", 0x1EE00, 0x1EEFF),
    b("Mahjong Tiles", "Mahjong", 0x1F000, 0x1F02F),
    b("Domino Tiles", "Domino", 0x1F030, 0x1F09F),
    b("Playing Cards", "Playing_Cards", 0x1F0A0, 0x1F0FF),
    b("Enclosed Alphanumeric Supplement", "Enclosed_Alphanum_Sup", 0x1F100, 0x1F1FF),
    b("Enclosed Ideographic Supplement", "Enclosed_Ideographic_Sup", 0x1F200, 0x1F2FF),
    b("Miscellaneous Symbols and Pictographs", "Misc_Pictographs", 0x1F300, 0x1F5FF),
    b("Emoticons", "Emoticons", 0x1F600, 0x1F64F),
    b("Ornamental Dingbats", "Ornamental_Dingbats", 0x1F650, 0x1F67F),
    b("Transport and Map Symbols", "Transport_And_Map", 0x1F680, 0x1F6FF),
    b("Alchemical Symbols", "Alchemical", 0x1F700, 0x1F77F),
    b("Geometric Shapes Extended", "Geometric_Shapes_Ext", 0x1F780, 0x1F7FF),
    b("Supplemental Arrows-C", "Sup_Arrows_C", 0x1F800, 0x1F8FF),
    b("Supplemental Symbols and Pictographs", "Sup_Symbols_And_Pictographs", 0x1F900, 0x1F9FF),
    b("Chess Symbols", "Chess_Symbols", 0x1FA00, 0x1FA6F),
    b("Symbols and Pictographs Extended-A", "Symbols_And_Pictographs_Ext_A", 0x1FA70, 0x1FAFF),
    b("Symbols for Legacy Computing", "Symbols_For_Legacy_Computing", 0x1FB00, 0x1FBFF),
    b("CJK Unified Ideographs Extension B", "CJK_Ext_B", 0x20000, 0x2A6DF),
    b("CJK Unified Ideographs Extension C", "CJK_Ext_C", 0x2A700, 0x2B73F),
    b("CJK Unified Ideographs Extension D", "CJK_Ext_D", 0x2B740, 0x2B81F),
    b("CJK Unified Ideographs Extension E", "CJK_Ext_E", 0x2B820, 0x2CEAF),
    b("CJK Unified Ideographs Extension F", "CJK_Ext_F", 0x2CEB0, 0x2EBEF),
    b("CJK Compatibility Ideographs Supplement", "CJK_Compat_Ideographs_Sup", 0x2F800, 0x2FA1F),
    b("CJK Unified Ideographs Extension G", "CJK_Ext_G", 0x30000, 0x3134F),
    b("Tags", "Tags", 0xE0000, 0xE007F),
    b("Variation Selectors Supplement", "VS_Sup", 0xE0100, 0xE01EF),
    b("Supplementary Private Use Area-A", "Sup_PUA_A", 0xF0000, 0xFFFFF),
    b("Supplementary Private Use Area-B", "Sup_PUA_B", 0x100000, 0x10FFFF),
];
