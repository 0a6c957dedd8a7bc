// Generated from the Unicode Character Database 14.0.0. Do not edit by hand.

use super::s;
use crate::tables::StatusEntry;

/// Code point ranges whose identifier status is `Allowed`, sorted by first code point.
pub static IDENTIFIER_STATUS: &[StatusEntry] = &[
    s(0x0027, None),
    s(0x002D, Some(0x002E)),
    s(0x0030, Some(0x003A)),
    s(0x0041, Some(0x005A)),
    s(0x005F, None),
    s(0x0061, Some(0x007A)),
    s(0x00B7, None),
    s(0x00C0, Some(0x00D6)),
    s(0x00D8, Some(0x00F6)),
    s(0x00F8, Some(0x0131)),
    s(0x0134, Some(0x013E)),
    s(0x0141, Some(0x0148)),
    s(0x014A, Some(0x017E)),
    s(0x018F, None),
    s(0x01A0, Some(0x01A1)),
    s(0x01AF, Some(0x01B0)),
    s(0x01CD, Some(0x01DC)),
    s(0x01DE, Some(0x01E3)),
    s(0x01E6, Some(0x01F0)),
    s(0x01F4, Some(0x01F5)),
    s(0x01F8, Some(0x021B)),
    s(0x021E, Some(0x021F)),
    s(0x0226, Some(0x0233)),
    s(0x0259, None),
    s(0x02BB, Some(0x02BC)),
    s(0x02EC, None),
    s(0x0300, Some(0x0304)),
    s(0x0306, Some(0x030C)),
    s(0x030F, Some(0x0311)),
    s(0x0313, Some(0x0314)),
    s(0x031B, None),
    s(0x0323, Some(0x0328)),
    s(0x032D, Some(0x032E)),
    s(0x0330, Some(0x0331)),
    s(0x0335, None),
    s(0x0338, Some(0x0339)),
    s(0x0342, None),
    s(0x0345, None),
    s(0x0375, None),
    s(0x037B, Some(0x037D)),
    s(0x0386, None),
    s(0x0388, Some(0x038A)),
    s(0x038C, None),
    s(0x038E, Some(0x03A1)),
    s(0x03A3, Some(0x03CE)),
    s(0x03FC, Some(0x045F)),
    s(0x048A, Some(0x04FF)),
    s(0x0510, Some(0x0529)),
    s(0x052E, Some(0x052F)),
    s(0x0531, Some(0x0556)),
    s(0x0559, None),
    s(0x0561, Some(0x0586)),
    s(0x058A, None),
    s(0x05B4, None),
    s(0x05D0, Some(0x05EA)),
    s(0x05EF, Some(0x05F4)),
    s(0x0620, Some(0x063F)),
    s(0x0641, Some(0x0655)),
    s(0x0660, Some(0x0669)),
    s(0x0670, Some(0x0672)),
    s(0x0674, None),
    s(0x0679, Some(0x068D)),
    s(0x068F, Some(0x06A0)),
    s(0x06A2, Some(0x06D3)),
    s(0x06D5, None),
    s(0x06E5, Some(0x06E6)),
    s(0x06EE, Some(0x06FF)),
    s(0x0750, Some(0x07B1)),
    s(0x0870, Some(0x0887)),
    s(0x0889, Some(0x088E)),
    s(0x08A0, Some(0x08AC)),
    s(0x08B2, None),
    s(0x08B5, Some(0x08C9)),
    s(0x0901, Some(0x094D)),
    s(0x094F, Some(0x0950)),
    s(0x0956, Some(0x0957)),
    s(0x0960, Some(0x0963)),
    s(0x0966, Some(0x096F)),
    s(0x0971, Some(0x0977)),
    s(0x0979, Some(0x097F)),
    s(0x0981, Some(0x0983)),
    s(0x0985, Some(0x098C)),
    s(0x098F, Some(0x0990)),
    s(0x0993, Some(0x09A8)),
    s(0x09AA, Some(0x09B0)),
    s(0x09B2, None),
    s(0x09B6, Some(0x09B9)),
    s(0x09BC, Some(0x09C4)),
    s(0x09C7, Some(0x09C8)),
    s(0x09CB, Some(0x09CE)),
    s(0x09D7, None),
    s(0x09E0, Some(0x09E3)),
    s(0x09E6, Some(0x09F1)),
    s(0x09FE, None),
    s(0x0A01, Some(0x0A03)),
    s(0x0A05, Some(0x0A0A)),
    s(0x0A0F, Some(0x0A10)),
    s(0x0A13, Some(0x0A28)),
    s(0x0A2A, Some(0x0A30)),
    s(0x0A32, None),
    s(0x0A35, None),
    s(0x0A38, Some(0x0A39)),
    s(0x0A3C, None),
    s(0x0A3E, Some(0x0A42)),
    s(0x0A47, Some(0x0A48)),
    s(0x0A4B, Some(0x0A4D)),
    s(0x0A5C, None),
    s(0x0A66, Some(0x0A74)),
    s(0x0A81, Some(0x0A83)),
    s(0x0A85, Some(0x0A8D)),
    s(0x0A8F, Some(0x0A91)),
    s(0x0A93, Some(0x0AA8)),
    s(0x0AAA, Some(0x0AB0)),
    s(0x0AB2, Some(0x0AB3)),
    s(0x0AB5, Some(0x0AB9)),
    s(0x0ABC, Some(0x0AC5)),
    s(0x0AC7, Some(0x0AC9)),
    s(0x0ACB, Some(0x0ACD)),
    s(0x0AD0, None),
    s(0x0AE0, Some(0x0AE3)),
    s(0x0AE6, Some(0x0AEF)),
    s(0x0AFA, Some(0x0AFF)),
    s(0x0B01, Some(0x0B03)),
    s(0x0B05, Some(0x0B0C)),
    s(0x0B0F, Some(0x0B10)),
    s(0x0B13, Some(0x0B28)),
    s(0x0B2A, Some(0x0B30)),
    s(0x0B32, Some(0x0B33)),
    s(0x0B35, Some(0x0B39)),
    s(0x0B3C, Some(0x0B43)),
    s(0x0B47, Some(0x0B48)),
    s(0x0B4B, Some(0x0B4D)),
    s(0x0B55, Some(0x0B57)),
    s(0x0B5F, Some(0x0B61)),
    s(0x0B66, Some(0x0B6F)),
    s(0x0B71, None),
    s(0x0B82, Some(0x0B83)),
    s(0x0B85, Some(0x0B8A)),
    s(0x0B8E, Some(0x0B90)),
    s(0x0B92, Some(0x0B95)),
    s(0x0B99, Some(0x0B9A)),
    s(0x0B9C, None),
    s(0x0B9E, Some(0x0B9F)),
    s(0x0BA3, Some(0x0BA4)),
    s(0x0BA8, Some(0x0BAA)),
    s(0x0BAE, Some(0x0BB9)),
    s(0x0BBE, Some(0x0BC2)),
    s(0x0BC6, Some(0x0BC8)),
    s(0x0BCA, Some(0x0BCD)),
    s(0x0BD0, None),
    s(0x0BD7, None),
    s(0x0BE6, Some(0x0BEF)),
    s(0x0C01, Some(0x0C0C)),
    s(0x0C0E, Some(0x0C10)),
    s(0x0C12, Some(0x0C28)),
    s(0x0C2A, Some(0x0C33)),
    s(0x0C35, Some(0x0C39)),
    s(0x0C3C, Some(0x0C44)),
    s(0x0C46, Some(0x0C48)),
    s(0x0C4A, Some(0x0C4D)),
    s(0x0C55, Some(0x0C56)),
    s(0x0C5D, None),
    s(0x0C60, Some(0x0C61)),
    s(0x0C66, Some(0x0C6F)),
    s(0x0C80, None),
    s(0x0C82, Some(0x0C83)),
    s(0x0C85, Some(0x0C8C)),
    s(0x0C8E, Some(0x0C90)),
    s(0x0C92, Some(0x0CA8)),
    s(0x0CAA, Some(0x0CB3)),
    s(0x0CB5, Some(0x0CB9)),
    s(0x0CBC, Some(0x0CC4)),
    s(0x0CC6, Some(0x0CC8)),
    s(0x0CCA, Some(0x0CCD)),
    s(0x0CD5, Some(0x0CD6)),
    s(0x0CDD, None),
    s(0x0CE0, Some(0x0CE3)),
    s(0x0CE6, Some(0x0CEF)),
    s(0x0CF1, Some(0x0CF2)),
    s(0x0D00, None),
    s(0x0D02, Some(0x0D03)),
    s(0x0D05, Some(0x0D0C)),
    s(0x0D0E, Some(0x0D10)),
    s(0x0D12, Some(0x0D3A)),
    s(0x0D3D, Some(0x0D43)),
    s(0x0D46, Some(0x0D48)),
    s(0x0D4A, Some(0x0D4E)),
    s(0x0D54, Some(0x0D57)),
    s(0x0D60, Some(0x0D61)),
    s(0x0D66, Some(0x0D6F)),
    s(0x0D7A, Some(0x0D7F)),
    s(0x0D82, Some(0x0D83)),
    s(0x0D85, Some(0x0D8E)),
    s(0x0D91, Some(0x0D96)),
    s(0x0D9A, Some(0x0DA5)),
    s(0x0DA7, Some(0x0DB1)),
    s(0x0DB3, Some(0x0DBB)),
    s(0x0DBD, None),
    s(0x0DC0, Some(0x0DC6)),
    s(0x0DCA, None),
    s(0x0DCF, Some(0x0DD4)),
    s(0x0DD6, None),
    s(0x0DD8, Some(0x0DDE)),
    s(0x0DF2, None),
    s(0x0E01, Some(0x0E32)),
    s(0x0E34, Some(0x0E3A)),
    s(0x0E40, Some(0x0E4E)),
    s(0x0E50, Some(0x0E59)),
    s(0x0E81, Some(0x0E82)),
    s(0x0E84, None),
    s(0x0E86, Some(0x0E8A)),
    s(0x0E8C, Some(0x0EA3)),
    s(0x0EA5, None),
    s(0x0EA7, Some(0x0EB2)),
    s(0x0EB4, Some(0x0EBD)),
    s(0x0EC0, Some(0x0EC4)),
    s(0x0EC6, None),
    s(0x0EC8, Some(0x0ECD)),
    s(0x0ED0, Some(0x0ED9)),
    s(0x0EDE, Some(0x0EDF)),
    s(0x0F00, None),
    s(0x0F0B, None),
    s(0x0F20, Some(0x0F29)),
    s(0x0F35, None),
    s(0x0F37, None),
    s(0x0F3E, Some(0x0F42)),
    s(0x0F44, Some(0x0F47)),
    s(0x0F49, Some(0x0F4C)),
    s(0x0F4E, Some(0x0F51)),
    s(0x0F53, Some(0x0F56)),
    s(0x0F58, Some(0x0F5B)),
    s(0x0F5D, Some(0x0F68)),
    s(0x0F6A, Some(0x0F6C)),
    s(0x0F71, Some(0x0F72)),
    s(0x0F74, None),
    s(0x0F7A, Some(0x0F80)),
    s(0x0F82, Some(0x0F84)),
    s(0x0F86, Some(0x0F92)),
    s(0x0F94, Some(0x0F97)),
    s(0x0F99, Some(0x0F9C)),
    s(0x0F9E, Some(0x0FA1)),
    s(0x0FA3, Some(0x0FA6)),
    s(0x0FA8, Some(0x0FAB)),
    s(0x0FAD, Some(0x0FB8)),
    s(0x0FBA, Some(0x0FBC)),
    s(0x0FC6, None),
    s(0x1000, Some(0x1049)),
    s(0x1050, Some(0x109D)),
    s(0x10C7, None),
    s(0x10CD, None),
    s(0x10D0, Some(0x10F0)),
    s(0x10F7, Some(0x10FA)),
    s(0x10FD, Some(0x10FF)),
    s(0x1200, Some(0x1248)),
    s(0x124A, Some(0x124D)),
    s(0x1250, Some(0x1256)),
    s(0x1258, None),
    s(0x125A, Some(0x125D)),
    s(0x1260, Some(0x1288)),
    s(0x128A, Some(0x128D)),
    s(0x1290, Some(0x12B0)),
    s(0x12B2, Some(0x12B5)),
    s(0x12B8, Some(0x12BE)),
    s(0x12C0, None),
    s(0x12C2, Some(0x12C5)),
    s(0x12C8, Some(0x12D6)),
    s(0x12D8, Some(0x1310)),
    s(0x1312, Some(0x1315)),
    s(0x1318, Some(0x135A)),
    s(0x135D, Some(0x135F)),
    s(0x1380, Some(0x138F)),
    s(0x1780, Some(0x17A2)),
    s(0x17A5, Some(0x17A7)),
    s(0x17A9, Some(0x17B3)),
    s(0x17B6, Some(0x17CD)),
    s(0x17D0, None),
    s(0x17D2, None),
    s(0x17D7, None),
    s(0x17DC, None),
    s(0x17E0, Some(0x17E9)),
    s(0x1C90, Some(0x1CBA)),
    s(0x1CBD, Some(0x1CBF)),
    s(0x1E00, Some(0x1E99)),
    s(0x1E9E, None),
    s(0x1EA0, Some(0x1EF9)),
    s(0x1F00, Some(0x1F15)),
    s(0x1F18, Some(0x1F1D)),
    s(0x1F20, Some(0x1F45)),
    s(0x1F48, Some(0x1F4D)),
    s(0x1F50, Some(0x1F57)),
    s(0x1F59, None),
    s(0x1F5B, None),
    s(0x1F5D, None),
    s(0x1F5F, Some(0x1F70)),
    s(0x1F72, None),
    s(0x1F74, None),
    s(0x1F76, None),
    s(0x1F78, None),
    s(0x1F7A, None),
    s(0x1F7C, None),
    s(0x1F80, Some(0x1FB4)),
    s(0x1FB6, Some(0x1FBA)),
    s(0x1FBC, None),
    s(0x1FC2, Some(0x1FC4)),
    s(0x1FC6, Some(0x1FC8)),
    s(0x1FCA, None),
    s(0x1FCC, None),
    s(0x1FD0, Some(0x1FD2)),
    s(0x1FD6, Some(0x1FDA)),
    s(0x1FE0, Some(0x1FE2)),
    s(0x1FE4, Some(0x1FEA)),
    s(0x1FEC, None),
    s(0x1FF2, Some(0x1FF4)),
    s(0x1FF6, Some(0x1FF8)),
    s(0x1FFA, None),
    s(0x1FFC, None),
    s(0x200C, Some(0x200D)),
    s(0x2010, None),
    s(0x2019, None),
    s(0x2027, None),
    s(0x2D27, None),
    s(0x2D2D, None),
    s(0x2D80, Some(0x2D96)),
    s(0x2DA0, Some(0x2DA6)),
    s(0x2DA8, Some(0x2DAE)),
    s(0x2DB0, Some(0x2DB6)),
    s(0x2DB8, Some(0x2DBE)),
    s(0x2DC0, Some(0x2DC6)),
    s(0x2DC8, Some(0x2DCE)),
    s(0x2DD0, Some(0x2DD6)),
    s(0x2DD8, Some(0x2DDE)),
    s(0x3005, Some(0x3007)),
    s(0x3041, Some(0x3096)),
    s(0x3099, Some(0x309A)),
    s(0x309D, Some(0x309E)),
    s(0x30A0, Some(0x30FE)),
    s(0x3105, Some(0x312D)),
    s(0x312F, None),
    s(0x31A0, Some(0x31BF)),
    s(0x3400, Some(0x4DBF)),
    s(0x4E00, Some(0x9FFF)),
    s(0xA67F, None),
    s(0xA717, Some(0xA71F)),
    s(0xA788, None),
    s(0xA78D, None),
    s(0xA792, Some(0xA793)),
    s(0xA7AA, None),
    s(0xA7AE, None),
    s(0xA7B8, Some(0xA7B9)),
    s(0xA7C0, Some(0xA7CA)),
    s(0xA7D0, Some(0xA7D1)),
    s(0xA7D3, None),
    s(0xA7D5, Some(0xA7D9)),
    s(0xA9E7, Some(0xA9FE)),
    s(0xAA60, Some(0xAA76)),
    s(0xAA7A, Some(0xAA7F)),
    s(0xAB01, Some(0xAB06)),
    s(0xAB09, Some(0xAB0E)),
    s(0xAB11, Some(0xAB16)),
    s(0xAB20, Some(0xAB26)),
    s(0xAB28, Some(0xAB2E)),
    s(0xAB66, Some(0xAB67)),
    s(0xAC00, Some(0xD7A3)),
    s(0xFA0E, Some(0xFA0F)),
    s(0xFA11, None),
    s(0xFA13, Some(0xFA14)),
    s(0xFA1F, None),
    s(0xFA21, None),
    s(0xFA23, Some(0xFA24)),
    s(0xFA27, Some(0xFA29)),
    s(0x11301, None),
    s(0x11303, None),
    s(0x1133B, Some(0x1133C)),
    s(0x16FF0, Some(0x16FF1)),
    s(0x1B11F, Some(0x1B122)),
    s(0x1B150, Some(0x1B152)),
    s(0x1B164, Some(0x1B167)),
    s(0x1DF00, Some(0x1DF1E)),
    s(0x1E7E0, Some(0x1E7E6)),
    s(0x1E7E8, Some(0x1E7EB)),
    s(0x1E7ED, Some(0x1E7EE)),
    s(0x1E7F0, Some(0x1E7FE)),
    s(0x20000, Some(0x2A6DF)),
    s(0x2A700, Some(0x2B738)),
    s(0x2B740, Some(0x2B81D)),
    s(0x2B820, Some(0x2CEA1)),
    s(0x2CEB0, Some(0x2EBE0)),
    s(0x30000, Some(0x3134A)),
];
