// Generated from the UTS #39 confusables data (ICU 73 spoof-checker skeletons), restricted to
// Unicode 14.0.0 letters of the Latin, IPA, Greek, Cyrillic, Armenian and Letterlike Symbols blocks.
// Do not edit by hand.

use super::i;
use crate::tables::ConfusableEntry;

/// Confusable characters mapped to the character they mimic, sorted by confusing code point.
///
/// Each row joins the members of one skeleton class, so canonical characters never
/// appear as keys.
///
/// Fields: confusing character, canonical character, confusing name, canonical name.
pub static INTENTIONAL: &[ConfusableEntry] = &[
    i('\u{0110}', '\u{00D0}', "LATIN CAPITAL LETTER D WITH STROKE", "LATIN CAPITAL LETTER ETH"),
    i('\u{0131}', '\u{0069}', "LATIN SMALL LETTER DOTLESS I", "LATIN SMALL LETTER I"),
    i('\u{0189}', '\u{00D0}', "LATIN CAPITAL LETTER AFRICAN D", "LATIN CAPITAL LETTER ETH"),
    i('\u{018D}', '\u{0067}', "LATIN SMALL LETTER TURNED DELTA", "LATIN SMALL LETTER G"),
    i('\u{0196}', '\u{0049}', "LATIN CAPITAL LETTER IOTA", "LATIN CAPITAL LETTER I"),
    i('\u{019D}', '\u{0145}', "LATIN CAPITAL LETTER N WITH LEFT HOOK", "LATIN CAPITAL LETTER N WITH CEDILLA"),
    i('\u{01A6}', '\u{0052}', "LATIN LETTER YR", "LATIN CAPITAL LETTER R"),
    i('\u{01BD}', '\u{0073}', "LATIN SMALL LETTER TONE FIVE", "LATIN SMALL LETTER S"),
    i('\u{01BF}', '\u{00FE}', "LATIN LETTER WYNN", "LATIN SMALL LETTER THORN"),
    i('\u{01C0}', '\u{006C}', "LATIN LETTER DENTAL CLICK", "LATIN SMALL LETTER L"),
    i('\u{01C3}', '\u{0021}', "LATIN LETTER RETROFLEX CLICK", "EXCLAMATION MARK"),
    i('\u{021C}', '\u{01B7}', "LATIN CAPITAL LETTER YOGH", "LATIN CAPITAL LETTER EZH"),
    i('\u{0251}', '\u{0061}', "LATIN SMALL LETTER ALPHA", "LATIN SMALL LETTER A"),
    i('\u{0259}', '\u{01DD}', "LATIN SMALL LETTER SCHWA", "LATIN SMALL LETTER TURNED E"),
    i('\u{0261}', '\u{0067}', "LATIN SMALL LETTER SCRIPT G", "LATIN SMALL LETTER G"),
    i('\u{0263}', '\u{0079}', "LATIN SMALL LETTER GAMMA", "LATIN SMALL LETTER Y"),
    i('\u{0269}', '\u{0069}', "LATIN SMALL LETTER IOTA", "LATIN SMALL LETTER I"),
    i('\u{026A}', '\u{0069}', "LATIN LETTER SMALL CAPITAL I", "LATIN SMALL LETTER I"),
    i('\u{026F}', '\u{0077}', "LATIN SMALL LETTER TURNED M", "LATIN SMALL LETTER W"),
    i('\u{028B}', '\u{0075}', "LATIN SMALL LETTER V WITH HOOK", "LATIN SMALL LETTER U"),
    i('\u{028F}', '\u{0079}', "LATIN LETTER SMALL CAPITAL Y", "LATIN SMALL LETTER Y"),
    i('\u{0292}', '\u{021D}', "LATIN SMALL LETTER EZH", "LATIN SMALL LETTER YOGH"),
    i('\u{0294}', '\u{003F}', "LATIN LETTER GLOTTAL STOP", "QUESTION MARK"),
    i('\u{037B}', '\u{0254}', "GREEK SMALL REVERSED LUNATE SIGMA SYMBOL", "LATIN SMALL LETTER OPEN O"),
    i('\u{037F}', '\u{004A}', "GREEK CAPITAL LETTER YOT", "LATIN CAPITAL LETTER J"),
    i('\u{0386}', '\u{00C1}', "GREEK CAPITAL LETTER ALPHA WITH TONOS", "LATIN CAPITAL LETTER A WITH ACUTE"),
    i('\u{0388}', '\u{00C9}', "GREEK CAPITAL LETTER EPSILON WITH TONOS", "LATIN CAPITAL LETTER E WITH ACUTE"),
    i('\u{038A}', '\u{00CD}', "GREEK CAPITAL LETTER IOTA WITH TONOS", "LATIN CAPITAL LETTER I WITH ACUTE"),
    i('\u{038C}', '\u{00D3}', "GREEK CAPITAL LETTER OMICRON WITH TONOS", "LATIN CAPITAL LETTER O WITH ACUTE"),
    i('\u{038E}', '\u{00DD}', "GREEK CAPITAL LETTER UPSILON WITH TONOS", "LATIN CAPITAL LETTER Y WITH ACUTE"),
    i('\u{0391}', '\u{0041}', "GREEK CAPITAL LETTER ALPHA", "LATIN CAPITAL LETTER A"),
    i('\u{0392}', '\u{0042}', "GREEK CAPITAL LETTER BETA", "LATIN CAPITAL LETTER B"),
    i('\u{0395}', '\u{0045}', "GREEK CAPITAL LETTER EPSILON", "LATIN CAPITAL LETTER E"),
    i('\u{0396}', '\u{005A}', "GREEK CAPITAL LETTER ZETA", "LATIN CAPITAL LETTER Z"),
    i('\u{0397}', '\u{0048}', "GREEK CAPITAL LETTER ETA", "LATIN CAPITAL LETTER H"),
    i('\u{0398}', '\u{019F}', "GREEK CAPITAL LETTER THETA", "LATIN CAPITAL LETTER O WITH MIDDLE TILDE"),
    i('\u{0399}', '\u{0049}', "GREEK CAPITAL LETTER IOTA", "LATIN CAPITAL LETTER I"),
    i('\u{039A}', '\u{004B}', "GREEK CAPITAL LETTER KAPPA", "LATIN CAPITAL LETTER K"),
    i('\u{039B}', '\u{0245}', "GREEK CAPITAL LETTER LAMDA", "LATIN CAPITAL LETTER TURNED V"),
    i('\u{039C}', '\u{004D}', "GREEK CAPITAL LETTER MU", "LATIN CAPITAL LETTER M"),
    i('\u{039D}', '\u{004E}', "GREEK CAPITAL LETTER NU", "LATIN CAPITAL LETTER N"),
    i('\u{039F}', '\u{004F}', "GREEK CAPITAL LETTER OMICRON", "LATIN CAPITAL LETTER O"),
    i('\u{03A1}', '\u{0050}', "GREEK CAPITAL LETTER RHO", "LATIN CAPITAL LETTER P"),
    i('\u{03A3}', '\u{01A9}', "GREEK CAPITAL LETTER SIGMA", "LATIN CAPITAL LETTER ESH"),
    i('\u{03A4}', '\u{0054}', "GREEK CAPITAL LETTER TAU", "LATIN CAPITAL LETTER T"),
    i('\u{03A5}', '\u{0059}', "GREEK CAPITAL LETTER UPSILON", "LATIN CAPITAL LETTER Y"),
    i('\u{03A7}', '\u{0058}', "GREEK CAPITAL LETTER CHI", "LATIN CAPITAL LETTER X"),
    i('\u{03AA}', '\u{00CF}', "GREEK CAPITAL LETTER IOTA WITH DIALYTIKA", "LATIN CAPITAL LETTER I WITH DIAERESIS"),
    i('\u{03AB}', '\u{0178}', "GREEK CAPITAL LETTER UPSILON WITH DIALYTIKA", "LATIN CAPITAL LETTER Y WITH DIAERESIS"),
    i('\u{03AC}', '\u{00E1}', "GREEK SMALL LETTER ALPHA WITH TONOS", "LATIN SMALL LETTER A WITH ACUTE"),
    i('\u{03AF}', '\u{00ED}', "GREEK SMALL LETTER IOTA WITH TONOS", "LATIN SMALL LETTER I WITH ACUTE"),
    i('\u{03B0}', '\u{01D8}', "GREEK SMALL LETTER UPSILON WITH DIALYTIKA AND TONOS", "LATIN SMALL LETTER U WITH DIAERESIS AND ACUTE"),
    i('\u{03B1}', '\u{0061}', "GREEK SMALL LETTER ALPHA", "LATIN SMALL LETTER A"),
    i('\u{03B2}', '\u{00DF}', "GREEK SMALL LETTER BETA", "LATIN SMALL LETTER SHARP S"),
    i('\u{03B3}', '\u{0079}', "GREEK SMALL LETTER GAMMA", "LATIN SMALL LETTER Y"),
    i('\u{03B5}', '\u{025B}', "GREEK SMALL LETTER EPSILON", "LATIN SMALL LETTER OPEN E"),
    i('\u{03B7}', '\u{019E}', "GREEK SMALL LETTER ETA", "LATIN SMALL LETTER N WITH LONG RIGHT LEG"),
    i('\u{03B9}', '\u{0069}', "GREEK SMALL LETTER IOTA", "LATIN SMALL LETTER I"),
    i('\u{03BA}', '\u{0138}', "GREEK SMALL LETTER KAPPA", "LATIN SMALL LETTER KRA"),
    i('\u{03BD}', '\u{0076}', "GREEK SMALL LETTER NU", "LATIN SMALL LETTER V"),
    i('\u{03BF}', '\u{006F}', "GREEK SMALL LETTER OMICRON", "LATIN SMALL LETTER O"),
    i('\u{03C1}', '\u{0070}', "GREEK SMALL LETTER RHO", "LATIN SMALL LETTER P"),
    i('\u{03C3}', '\u{006F}', "GREEK SMALL LETTER SIGMA", "LATIN SMALL LETTER O"),
    i('\u{03C5}', '\u{0075}', "GREEK SMALL LETTER UPSILON", "LATIN SMALL LETTER U"),
    i('\u{03C6}', '\u{0278}', "GREEK SMALL LETTER PHI", "LATIN SMALL LETTER PHI"),
    i('\u{03CA}', '\u{00EF}', "GREEK SMALL LETTER IOTA WITH DIALYTIKA", "LATIN SMALL LETTER I WITH DIAERESIS"),
    i('\u{03CB}', '\u{00FC}', "GREEK SMALL LETTER UPSILON WITH DIALYTIKA", "LATIN SMALL LETTER U WITH DIAERESIS"),
    i('\u{03CC}', '\u{00F3}', "GREEK SMALL LETTER OMICRON WITH TONOS", "LATIN SMALL LETTER O WITH ACUTE"),
    i('\u{03CD}', '\u{00FA}', "GREEK SMALL LETTER UPSILON WITH TONOS", "LATIN SMALL LETTER U WITH ACUTE"),
    i('\u{03DB}', '\u{03C2}', "GREEK SMALL LETTER STIGMA", "GREEK SMALL LETTER FINAL SIGMA"),
    i('\u{03DC}', '\u{0046}', "GREEK LETTER DIGAMMA", "LATIN CAPITAL LETTER F"),
    i('\u{03E8}', '\u{01A7}', "COPTIC CAPITAL LETTER HORI", "LATIN CAPITAL LETTER TONE TWO"),
    i('\u{03E9}', '\u{01A8}', "COPTIC SMALL LETTER HORI", "LATIN SMALL LETTER TONE TWO"),
    i('\u{03F3}', '\u{006A}', "GREEK LETTER YOT", "LATIN SMALL LETTER J"),
    i('\u{03F7}', '\u{00DE}', "GREEK CAPITAL LETTER SHO", "LATIN CAPITAL LETTER THORN"),
    i('\u{03F8}', '\u{00FE}', "GREEK SMALL LETTER SHO", "LATIN SMALL LETTER THORN"),
    i('\u{03FA}', '\u{004D}', "GREEK CAPITAL LETTER SAN", "LATIN CAPITAL LETTER M"),
    i('\u{03FD}', '\u{0186}', "GREEK CAPITAL REVERSED LUNATE SIGMA SYMBOL", "LATIN CAPITAL LETTER OPEN O"),
    i('\u{0400}', '\u{00C8}', "CYRILLIC CAPITAL LETTER IE WITH GRAVE", "LATIN CAPITAL LETTER E WITH GRAVE"),
    i('\u{0401}', '\u{00CB}', "CYRILLIC CAPITAL LETTER IO", "LATIN CAPITAL LETTER E WITH DIAERESIS"),
    i('\u{0405}', '\u{0053}', "CYRILLIC CAPITAL LETTER DZE", "LATIN CAPITAL LETTER S"),
    i('\u{0406}', '\u{0049}', "CYRILLIC CAPITAL LETTER BYELORUSSIAN-UKRAINIAN I", "LATIN CAPITAL LETTER I"),
    i('\u{0407}', '\u{00CF}', "CYRILLIC CAPITAL LETTER YI", "LATIN CAPITAL LETTER I WITH DIAERESIS"),
    i('\u{0408}', '\u{004A}', "CYRILLIC CAPITAL LETTER JE", "LATIN CAPITAL LETTER J"),
    i('\u{0410}', '\u{0041}', "CYRILLIC CAPITAL LETTER A", "LATIN CAPITAL LETTER A"),
    i('\u{0411}', '\u{0182}', "CYRILLIC CAPITAL LETTER BE", "LATIN CAPITAL LETTER B WITH TOPBAR"),
    i('\u{0412}', '\u{0042}', "CYRILLIC CAPITAL LETTER VE", "LATIN CAPITAL LETTER B"),
    i('\u{0413}', '\u{0393}', "CYRILLIC CAPITAL LETTER GHE", "GREEK CAPITAL LETTER GAMMA"),
    i('\u{0415}', '\u{0045}', "CYRILLIC CAPITAL LETTER IE", "LATIN CAPITAL LETTER E"),
    i('\u{0417}', '\u{01B7}', "CYRILLIC CAPITAL LETTER ZE", "LATIN CAPITAL LETTER EZH"),
    i('\u{0418}', '\u{0376}', "CYRILLIC CAPITAL LETTER I", "GREEK CAPITAL LETTER PAMPHYLIAN DIGAMMA"),
    i('\u{041A}', '\u{004B}', "CYRILLIC CAPITAL LETTER KA", "LATIN CAPITAL LETTER K"),
    i('\u{041B}', '\u{0245}', "CYRILLIC CAPITAL LETTER EL", "LATIN CAPITAL LETTER TURNED V"),
    i('\u{041C}', '\u{004D}', "CYRILLIC CAPITAL LETTER EM", "LATIN CAPITAL LETTER M"),
    i('\u{041D}', '\u{0048}', "CYRILLIC CAPITAL LETTER EN", "LATIN CAPITAL LETTER H"),
    i('\u{041E}', '\u{004F}', "CYRILLIC CAPITAL LETTER O", "LATIN CAPITAL LETTER O"),
    i('\u{041F}', '\u{03A0}', "CYRILLIC CAPITAL LETTER PE", "GREEK CAPITAL LETTER PI"),
    i('\u{0420}', '\u{0050}', "CYRILLIC CAPITAL LETTER ER", "LATIN CAPITAL LETTER P"),
    i('\u{0421}', '\u{0043}', "CYRILLIC CAPITAL LETTER ES", "LATIN CAPITAL LETTER C"),
    i('\u{0422}', '\u{0054}', "CYRILLIC CAPITAL LETTER TE", "LATIN CAPITAL LETTER T"),
    i('\u{0423}', '\u{0059}', "CYRILLIC CAPITAL LETTER U", "LATIN CAPITAL LETTER Y"),
    i('\u{0424}', '\u{03A6}', "CYRILLIC CAPITAL LETTER EF", "GREEK CAPITAL LETTER PHI"),
    i('\u{0425}', '\u{0058}', "CYRILLIC CAPITAL LETTER HA", "LATIN CAPITAL LETTER X"),
    i('\u{042C}', '\u{0184}', "CYRILLIC CAPITAL LETTER SOFT SIGN", "LATIN CAPITAL LETTER TONE SIX"),
    i('\u{0430}', '\u{0061}', "CYRILLIC SMALL LETTER A", "LATIN SMALL LETTER A"),
    i('\u{0432}', '\u{0299}', "CYRILLIC SMALL LETTER VE", "LATIN LETTER SMALL CAPITAL B"),
    i('\u{0433}', '\u{0072}', "CYRILLIC SMALL LETTER GHE", "LATIN SMALL LETTER R"),
    i('\u{0435}', '\u{0065}', "CYRILLIC SMALL LETTER IE", "LATIN SMALL LETTER E"),
    i('\u{0437}', '\u{025C}', "CYRILLIC SMALL LETTER ZE", "LATIN SMALL LETTER REVERSED OPEN E"),
    i('\u{0438}', '\u{0377}', "CYRILLIC SMALL LETTER I", "GREEK SMALL LETTER PAMPHYLIAN DIGAMMA"),
    i('\u{043A}', '\u{0138}', "CYRILLIC SMALL LETTER KA", "LATIN SMALL LETTER KRA"),
    i('\u{043C}', '\u{028D}', "CYRILLIC SMALL LETTER EM", "LATIN SMALL LETTER TURNED W"),
    i('\u{043D}', '\u{029C}', "CYRILLIC SMALL LETTER EN", "LATIN LETTER SMALL CAPITAL H"),
    i('\u{043E}', '\u{006F}', "CYRILLIC SMALL LETTER O", "LATIN SMALL LETTER O"),
    i('\u{043F}', '\u{03C0}', "CYRILLIC SMALL LETTER PE", "GREEK SMALL LETTER PI"),
    i('\u{0440}', '\u{0070}', "CYRILLIC SMALL LETTER ER", "LATIN SMALL LETTER P"),
    i('\u{0441}', '\u{0063}', "CYRILLIC SMALL LETTER ES", "LATIN SMALL LETTER C"),
    i('\u{0442}', '\u{03C4}', "CYRILLIC SMALL LETTER TE", "GREEK SMALL LETTER TAU"),
    i('\u{0443}', '\u{0079}', "CYRILLIC SMALL LETTER U", "LATIN SMALL LETTER Y"),
    i('\u{0444}', '\u{0278}', "CYRILLIC SMALL LETTER EF", "LATIN SMALL LETTER PHI"),
    i('\u{0445}', '\u{0078}', "CYRILLIC SMALL LETTER HA", "LATIN SMALL LETTER X"),
    i('\u{044C}', '\u{0185}', "CYRILLIC SMALL LETTER SOFT SIGN", "LATIN SMALL LETTER TONE SIX"),
    i('\u{0450}', '\u{00E8}', "CYRILLIC SMALL LETTER IE WITH GRAVE", "LATIN SMALL LETTER E WITH GRAVE"),
    i('\u{0451}', '\u{00EB}', "CYRILLIC SMALL LETTER IO", "LATIN SMALL LETTER E WITH DIAERESIS"),
    i('\u{0453}', '\u{0155}', "CYRILLIC SMALL LETTER GJE", "LATIN SMALL LETTER R WITH ACUTE"),
    i('\u{0454}', '\u{025B}', "CYRILLIC SMALL LETTER UKRAINIAN IE", "LATIN SMALL LETTER OPEN E"),
    i('\u{0455}', '\u{0073}', "CYRILLIC SMALL LETTER DZE", "LATIN SMALL LETTER S"),
    i('\u{0456}', '\u{0069}', "CYRILLIC SMALL LETTER BYELORUSSIAN-UKRAINIAN I", "LATIN SMALL LETTER I"),
    i('\u{0457}', '\u{00EF}', "CYRILLIC SMALL LETTER YI", "LATIN SMALL LETTER I WITH DIAERESIS"),
    i('\u{0458}', '\u{006A}', "CYRILLIC SMALL LETTER JE", "LATIN SMALL LETTER J"),
    i('\u{045B}', '\u{0127}', "CYRILLIC SMALL LETTER TSHE", "LATIN SMALL LETTER H WITH STROKE"),
    i('\u{0461}', '\u{0077}', "CYRILLIC SMALL LETTER OMEGA", "LATIN SMALL LETTER W"),
    i('\u{0463}', '\u{0180}', "CYRILLIC SMALL LETTER YAT", "LATIN SMALL LETTER B WITH STROKE"),
    i('\u{0470}', '\u{03A8}', "CYRILLIC CAPITAL LETTER PSI", "GREEK CAPITAL LETTER PSI"),
    i('\u{0471}', '\u{03C8}', "CYRILLIC SMALL LETTER PSI", "GREEK SMALL LETTER PSI"),
    i('\u{0472}', '\u{019F}', "CYRILLIC CAPITAL LETTER FITA", "LATIN CAPITAL LETTER O WITH MIDDLE TILDE"),
    i('\u{0473}', '\u{0275}', "CYRILLIC SMALL LETTER FITA", "LATIN SMALL LETTER BARRED O"),
    i('\u{0474}', '\u{0056}', "CYRILLIC CAPITAL LETTER IZHITSA", "LATIN CAPITAL LETTER V"),
    i('\u{0475}', '\u{0076}', "CYRILLIC SMALL LETTER IZHITSA", "LATIN SMALL LETTER V"),
    i('\u{048C}', '\u{0462}', "CYRILLIC CAPITAL LETTER SEMISOFT SIGN", "CYRILLIC CAPITAL LETTER YAT"),
    i('\u{048D}', '\u{0180}', "CYRILLIC SMALL LETTER SEMISOFT SIGN", "LATIN SMALL LETTER B WITH STROKE"),
    i('\u{0493}', '\u{024D}', "CYRILLIC SMALL LETTER GHE WITH STROKE", "LATIN SMALL LETTER R WITH STROKE"),
    i('\u{04AA}', '\u{00C7}', "CYRILLIC CAPITAL LETTER ES WITH DESCENDER", "LATIN CAPITAL LETTER C WITH CEDILLA"),
    i('\u{04AB}', '\u{00E7}', "CYRILLIC SMALL LETTER ES WITH DESCENDER", "LATIN SMALL LETTER C WITH CEDILLA"),
    i('\u{04AE}', '\u{0059}', "CYRILLIC CAPITAL LETTER STRAIGHT U", "LATIN CAPITAL LETTER Y"),
    i('\u{04AF}', '\u{0079}', "CYRILLIC SMALL LETTER STRAIGHT U", "LATIN SMALL LETTER Y"),
    i('\u{04B0}', '\u{024E}', "CYRILLIC CAPITAL LETTER STRAIGHT U WITH STROKE", "LATIN CAPITAL LETTER Y WITH STROKE"),
    i('\u{04B1}', '\u{024F}', "CYRILLIC SMALL LETTER STRAIGHT U WITH STROKE", "LATIN SMALL LETTER Y WITH STROKE"),
    i('\u{04BB}', '\u{0068}', "CYRILLIC SMALL LETTER SHHA", "LATIN SMALL LETTER H"),
    i('\u{04BD}', '\u{0065}', "CYRILLIC SMALL LETTER ABKHASIAN CHE", "LATIN SMALL LETTER E"),
    i('\u{04BF}', '\u{0119}', "CYRILLIC SMALL LETTER ABKHASIAN CHE WITH DESCENDER", "LATIN SMALL LETTER E WITH OGONEK"),
    i('\u{04C0}', '\u{0049}', "CYRILLIC LETTER PALOCHKA", "LATIN CAPITAL LETTER I"),
    i('\u{04C9}', '\u{04C7}', "CYRILLIC CAPITAL LETTER EN WITH TAIL", "CYRILLIC CAPITAL LETTER EN WITH HOOK"),
    i('\u{04CA}', '\u{04C8}', "CYRILLIC SMALL LETTER EN WITH TAIL", "CYRILLIC SMALL LETTER EN WITH HOOK"),
    i('\u{04CB}', '\u{04B6}', "CYRILLIC CAPITAL LETTER KHAKASSIAN CHE", "CYRILLIC CAPITAL LETTER CHE WITH DESCENDER"),
    i('\u{04CC}', '\u{04B7}', "CYRILLIC SMALL LETTER KHAKASSIAN CHE", "CYRILLIC SMALL LETTER CHE WITH DESCENDER"),
    i('\u{04CF}', '\u{0069}', "CYRILLIC SMALL LETTER PALOCHKA", "LATIN SMALL LETTER I"),
    i('\u{04D0}', '\u{0102}', "CYRILLIC CAPITAL LETTER A WITH BREVE", "LATIN CAPITAL LETTER A WITH BREVE"),
    i('\u{04D1}', '\u{0103}', "CYRILLIC SMALL LETTER A WITH BREVE", "LATIN SMALL LETTER A WITH BREVE"),
    i('\u{04D2}', '\u{00C4}', "CYRILLIC CAPITAL LETTER A WITH DIAERESIS", "LATIN CAPITAL LETTER A WITH DIAERESIS"),
    i('\u{04D3}', '\u{00E4}', "CYRILLIC SMALL LETTER A WITH DIAERESIS", "LATIN SMALL LETTER A WITH DIAERESIS"),
    i('\u{04D4}', '\u{00C6}', "CYRILLIC CAPITAL LIGATURE A IE", "LATIN CAPITAL LETTER AE"),
    i('\u{04D5}', '\u{00E6}', "CYRILLIC SMALL LIGATURE A IE", "LATIN SMALL LETTER AE"),
    i('\u{04D6}', '\u{0114}', "CYRILLIC CAPITAL LETTER IE WITH BREVE", "LATIN CAPITAL LETTER E WITH BREVE"),
    i('\u{04D7}', '\u{0115}', "CYRILLIC SMALL LETTER IE WITH BREVE", "LATIN SMALL LETTER E WITH BREVE"),
    i('\u{04D8}', '\u{018F}', "CYRILLIC CAPITAL LETTER SCHWA", "LATIN CAPITAL LETTER SCHWA"),
    i('\u{04D9}', '\u{01DD}', "CYRILLIC SMALL LETTER SCHWA", "LATIN SMALL LETTER TURNED E"),
    i('\u{04E0}', '\u{01B7}', "CYRILLIC CAPITAL LETTER ABKHASIAN DZE", "LATIN CAPITAL LETTER EZH"),
    i('\u{04E1}', '\u{021D}', "CYRILLIC SMALL LETTER ABKHASIAN DZE", "LATIN SMALL LETTER YOGH"),
    i('\u{04E6}', '\u{00D6}', "CYRILLIC CAPITAL LETTER O WITH DIAERESIS", "LATIN CAPITAL LETTER O WITH DIAERESIS"),
    i('\u{04E7}', '\u{00F6}', "CYRILLIC SMALL LETTER O WITH DIAERESIS", "LATIN SMALL LETTER O WITH DIAERESIS"),
    i('\u{04E8}', '\u{019F}', "CYRILLIC CAPITAL LETTER BARRED O", "LATIN CAPITAL LETTER O WITH MIDDLE TILDE"),
    i('\u{04E9}', '\u{0275}', "CYRILLIC SMALL LETTER BARRED O", "LATIN SMALL LETTER BARRED O"),
    i('\u{04EE}', '\u{0232}', "CYRILLIC CAPITAL LETTER U WITH MACRON", "LATIN CAPITAL LETTER Y WITH MACRON"),
    i('\u{04EF}', '\u{0233}', "CYRILLIC SMALL LETTER U WITH MACRON", "LATIN SMALL LETTER Y WITH MACRON"),
    i('\u{04F0}', '\u{0178}', "CYRILLIC CAPITAL LETTER U WITH DIAERESIS", "LATIN CAPITAL LETTER Y WITH DIAERESIS"),
    i('\u{04F1}', '\u{00FF}', "CYRILLIC SMALL LETTER U WITH DIAERESIS", "LATIN SMALL LETTER Y WITH DIAERESIS"),
    i('\u{0501}', '\u{0064}', "CYRILLIC SMALL LETTER KOMI DE", "LATIN SMALL LETTER D"),
    i('\u{050A}', '\u{01F6}', "CYRILLIC CAPITAL LETTER KOMI NJE", "LATIN CAPITAL LETTER HWAIR"),
    i('\u{050C}', '\u{0047}', "CYRILLIC CAPITAL LETTER KOMI SJE", "LATIN CAPITAL LETTER G"),
    i('\u{050D}', '\u{0262}', "CYRILLIC SMALL LETTER KOMI SJE", "LATIN LETTER SMALL CAPITAL G"),
    i('\u{0510}', '\u{0190}', "CYRILLIC CAPITAL LETTER REVERSED ZE", "LATIN CAPITAL LETTER OPEN E"),
    i('\u{0511}', '\u{025B}', "CYRILLIC SMALL LETTER REVERSED ZE", "LATIN SMALL LETTER OPEN E"),
    i('\u{051B}', '\u{0071}', "CYRILLIC SMALL LETTER QA", "LATIN SMALL LETTER Q"),
    i('\u{051C}', '\u{0057}', "CYRILLIC CAPITAL LETTER WE", "LATIN CAPITAL LETTER W"),
    i('\u{051D}', '\u{0077}', "CYRILLIC SMALL LETTER WE", "LATIN SMALL LETTER W"),
    i('\u{054D}', '\u{0055}', "ARMENIAN CAPITAL LETTER SEH", "LATIN CAPITAL LETTER U"),
    i('\u{054F}', '\u{0053}', "ARMENIAN CAPITAL LETTER TIWN", "LATIN CAPITAL LETTER S"),
    i('\u{0553}', '\u{03A6}', "ARMENIAN CAPITAL LETTER PIWR", "GREEK CAPITAL LETTER PHI"),
    i('\u{0555}', '\u{004F}', "ARMENIAN CAPITAL LETTER OH", "LATIN CAPITAL LETTER O"),
    i('\u{0561}', '\u{0077}', "ARMENIAN SMALL LETTER AYB", "LATIN SMALL LETTER W"),
    i('\u{0563}', '\u{0071}', "ARMENIAN SMALL LETTER GIM", "LATIN SMALL LETTER Q"),
    i('\u{0566}', '\u{0071}', "ARMENIAN SMALL LETTER ZA", "LATIN SMALL LETTER Q"),
    i('\u{056E}', '\u{03B4}', "ARMENIAN SMALL LETTER CA", "GREEK SMALL LETTER DELTA"),
    i('\u{0570}', '\u{0068}', "ARMENIAN SMALL LETTER HO", "LATIN SMALL LETTER H"),
    i('\u{0575}', '\u{0237}', "ARMENIAN SMALL LETTER YI", "LATIN SMALL LETTER DOTLESS J"),
    i('\u{0578}', '\u{006E}', "ARMENIAN SMALL LETTER VO", "LATIN SMALL LETTER N"),
    i('\u{057A}', '\u{0270}', "ARMENIAN SMALL LETTER PEH", "LATIN SMALL LETTER TURNED M WITH LONG LEG"),
    i('\u{057C}', '\u{006E}', "ARMENIAN SMALL LETTER RA", "LATIN SMALL LETTER N"),
    i('\u{057D}', '\u{0075}', "ARMENIAN SMALL LETTER SEH", "LATIN SMALL LETTER U"),
    i('\u{0581}', '\u{0067}', "ARMENIAN SMALL LETTER CO", "LATIN SMALL LETTER G"),
    i('\u{0584}', '\u{0066}', "ARMENIAN SMALL LETTER KEH", "LATIN SMALL LETTER F"),
    i('\u{0585}', '\u{006F}', "ARMENIAN SMALL LETTER OH", "LATIN SMALL LETTER O"),
    i('\u{2126}', '\u{03A9}', "OHM SIGN", "GREEK CAPITAL LETTER OMEGA"),
    i('\u{212A}', '\u{004B}', "KELVIN SIGN", "LATIN CAPITAL LETTER K"),
    i('\u{212B}', '\u{00C5}', "ANGSTROM SIGN", "LATIN CAPITAL LETTER A WITH RING ABOVE"),
];
