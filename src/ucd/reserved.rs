// Generated from the Unicode Character Database 14.0.0. Do not edit by hand.

use super::r;
use crate::tables::ReservedEntry;
use crate::tables::ReservedKind::{Noncharacter, Reserved, Surrogate};

/// Unassigned, surrogate and noncharacter ranges, sorted by first code point.
pub static RESERVED: &[ReservedEntry] = &[
    r(Reserved, 0x0378, 0x0379),
    r(Reserved, 0x0380, 0x0383),
    r(Reserved, 0x038B, 0x038B),
    r(Reserved, 0x038D, 0x038D),
    r(Reserved, 0x03A2, 0x03A2),
    r(Reserved, 0x0530, 0x0530),
    r(Reserved, 0x0557, 0x0558),
    r(Reserved, 0x058B, 0x058C),
    r(Reserved, 0x0590, 0x0590),
    r(Reserved, 0x05C8, 0x05CF),
    r(Reserved, 0x05EB, 0x05EE),
    r(Reserved, 0x05F5, 0x05FF),
    r(Reserved, 0x070E, 0x070E),
    r(Reserved, 0x074B, 0x074C),
    r(Reserved, 0x07B2, 0x07BF),
    r(Reserved, 0x07FB, 0x07FC),
    r(Reserved, 0x082E, 0x082F),
    r(Reserved, 0x083F, 0x083F),
    r(Reserved, 0x085C, 0x085D),
    r(Reserved, 0x085F, 0x085F),
    r(Reserved, 0x086B, 0x086F),
    r(Reserved, 0x088F, 0x088F),
    r(Reserved, 0x0892, 0x0897),
    r(Reserved, 0x0984, 0x0984),
    r(Reserved, 0x098D, 0x098E),
    r(Reserved, 0x0991, 0x0992),
    r(Reserved, 0x09A9, 0x09A9),
    r(Reserved, 0x09B1, 0x09B1),
    r(Reserved, 0x09B3, 0x09B5),
    r(Reserved, 0x09BA, 0x09BB),
    r(Reserved, 0x09C5, 0x09C6),
    r(Reserved, 0x09C9, 0x09CA),
    r(Reserved, 0x09CF, 0x09D6),
    r(Reserved, 0x09D8, 0x09DB),
    r(Reserved, 0x09DE, 0x09DE),
    r(Reserved, 0x09E4, 0x09E5),
    r(Reserved, 0x09FF, 0x09FF),
    r(Reserved, 0x0A00, 0x0A00),
    r(Reserved, 0x0A04, 0x0A04),
    r(Reserved, 0x0A0B, 0x0A0E),
    r(Reserved, 0x0A11, 0x0A12),
    r(Reserved, 0x0A29, 0x0A29),
    r(Reserved, 0x0A31, 0x0A31),
    r(Reserved, 0x0A34, 0x0A34),
    r(Reserved, 0x0A37, 0x0A37),
    r(Reserved, 0x0A3A, 0x0A3B),
    r(Reserved, 0x0A3D, 0x0A3D),
    r(Reserved, 0x0A43, 0x0A46),
    r(Reserved, 0x0A49, 0x0A4A),
    r(Reserved, 0x0A4E, 0x0A50),
    r(Reserved, 0x0A52, 0x0A58),
    r(Reserved, 0x0A5D, 0x0A5D),
    r(Reserved, 0x0A5F, 0x0A65),
    r(Reserved, 0x0A77, 0x0A7F),
    r(Reserved, 0x0A80, 0x0A80),
    r(Reserved, 0x0A84, 0x0A84),
    r(Reserved, 0x0A8E, 0x0A8E),
    r(Reserved, 0x0A92, 0x0A92),
    r(Reserved, 0x0AA9, 0x0AA9),
    r(Reserved, 0x0AB1, 0x0AB1),
    r(Reserved, 0x0AB4, 0x0AB4),
    r(Reserved, 0x0ABA, 0x0ABB),
    r(Reserved, 0x0AC6, 0x0AC6),
    r(Reserved, 0x0ACA, 0x0ACA),
    r(Reserved, 0x0ACE, 0x0ACF),
    r(Reserved, 0x0AD1, 0x0ADF),
    r(Reserved, 0x0AE4, 0x0AE5),
    r(Reserved, 0x0AF2, 0x0AF8),
    r(Reserved, 0x0B00, 0x0B00),
    r(Reserved, 0x0B04, 0x0B04),
    r(Reserved, 0x0B0D, 0x0B0E),
    r(Reserved, 0x0B11, 0x0B12),
    r(Reserved, 0x0B29, 0x0B29),
    r(Reserved, 0x0B31, 0x0B31),
    r(Reserved, 0x0B34, 0x0B34),
    r(Reserved, 0x0B3A, 0x0B3B),
    r(Reserved, 0x0B45, 0x0B46),
    r(Reserved, 0x0B49, 0x0B4A),
    r(Reserved, 0x0B4E, 0x0B54),
    r(Reserved, 0x0B58, 0x0B5B),
    r(Reserved, 0x0B5E, 0x0B5E),
    r(Reserved, 0x0B64, 0x0B65),
    r(Reserved, 0x0B78, 0x0B7F),
    r(Reserved, 0x0B80, 0x0B81),
    r(Reserved, 0x0B84, 0x0B84),
    r(Reserved, 0x0B8B, 0x0B8D),
    r(Reserved, 0x0B91, 0x0B91),
    r(Reserved, 0x0B96, 0x0B98),
    r(Reserved, 0x0B9B, 0x0B9B),
    r(Reserved, 0x0B9D, 0x0B9D),
    r(Reserved, 0x0BA0, 0x0BA2),
    r(Reserved, 0x0BA5, 0x0BA7),
    r(Reserved, 0x0BAB, 0x0BAD),
    r(Reserved, 0x0BBA, 0x0BBD),
    r(Reserved, 0x0BC3, 0x0BC5),
    r(Reserved, 0x0BC9, 0x0BC9),
    r(Reserved, 0x0BCE, 0x0BCF),
    r(Reserved, 0x0BD1, 0x0BD6),
    r(Reserved, 0x0BD8, 0x0BE5),
    r(Reserved, 0x0BFB, 0x0BFF),
    r(Reserved, 0x0C0D, 0x0C0D),
    r(Reserved, 0x0C11, 0x0C11),
    r(Reserved, 0x0C29, 0x0C29),
    r(Reserved, 0x0C3A, 0x0C3B),
    r(Reserved, 0x0C45, 0x0C45),
    r(Reserved, 0x0C49, 0x0C49),
    r(Reserved, 0x0C4E, 0x0C54),
    r(Reserved, 0x0C57, 0x0C57),
    r(Reserved, 0x0C5B, 0x0C5C),
    r(Reserved, 0x0C5E, 0x0C5F),
    r(Reserved, 0x0C64, 0x0C65),
    r(Reserved, 0x0C70, 0x0C76),
    r(Reserved, 0x0C8D, 0x0C8D),
    r(Reserved, 0x0C91, 0x0C91),
    r(Reserved, 0x0CA9, 0x0CA9),
    r(Reserved, 0x0CB4, 0x0CB4),
    r(Reserved, 0x0CBA, 0x0CBB),
    r(Reserved, 0x0CC5, 0x0CC5),
    r(Reserved, 0x0CC9, 0x0CC9),
    r(Reserved, 0x0CCE, 0x0CD4),
    r(Reserved, 0x0CD7, 0x0CDC),
    r(Reserved, 0x0CDF, 0x0CDF),
    r(Reserved, 0x0CE4, 0x0CE5),
    r(Reserved, 0x0CF0, 0x0CF0),
    r(Reserved, 0x0CF3, 0x0CFF),
    r(Reserved, 0x0D0D, 0x0D0D),
    r(Reserved, 0x0D11, 0x0D11),
    r(Reserved, 0x0D45, 0x0D45),
    r(Reserved, 0x0D49, 0x0D49),
    r(Reserved, 0x0D50, 0x0D53),
    r(Reserved, 0x0D64, 0x0D65),
    r(Reserved, 0x0D80, 0x0D80),
    r(Reserved, 0x0D84, 0x0D84),
    r(Reserved, 0x0D97, 0x0D99),
    r(Reserved, 0x0DB2, 0x0DB2),
    r(Reserved, 0x0DBC, 0x0DBC),
    r(Reserved, 0x0DBE, 0x0DBF),
    r(Reserved, 0x0DC7, 0x0DC9),
    r(Reserved, 0x0DCB, 0x0DCE),
    r(Reserved, 0x0DD5, 0x0DD5),
    r(Reserved, 0x0DD7, 0x0DD7),
    r(Reserved, 0x0DE0, 0x0DE5),
    r(Reserved, 0x0DF0, 0x0DF1),
    r(Reserved, 0x0DF5, 0x0DFF),
    r(Reserved, 0x0E00, 0x0E00),
    r(Reserved, 0x0E3B, 0x0E3E),
    r(Reserved, 0x0E5C, 0x0E7F),
    r(Reserved, 0x0E80, 0x0E80),
    r(Reserved, 0x0E83, 0x0E83),
    r(Reserved, 0x0E85, 0x0E85),
    r(Reserved, 0x0E8B, 0x0E8B),
    r(Reserved, 0x0EA4, 0x0EA4),
    r(Reserved, 0x0EA6, 0x0EA6),
    r(Reserved, 0x0EBE, 0x0EBF),
    r(Reserved, 0x0EC5, 0x0EC5),
    r(Reserved, 0x0EC7, 0x0EC7),
    r(Reserved, 0x0ECE, 0x0ECF),
    r(Reserved, 0x0EDA, 0x0EDB),
    r(Reserved, 0x0EE0, 0x0EFF),
    r(Reserved, 0x0F48, 0x0F48),
    r(Reserved, 0x0F6D, 0x0F70),
    r(Reserved, 0x0F98, 0x0F98),
    r(Reserved, 0x0FBD, 0x0FBD),
    r(Reserved, 0x0FCD, 0x0FCD),
    r(Reserved, 0x0FDB, 0x0FFF),
    r(Reserved, 0x10C6, 0x10C6),
    r(Reserved, 0x10C8, 0x10CC),
    r(Reserved, 0x10CE, 0x10CF),
    r(Reserved, 0x1249, 0x1249),
    r(Reserved, 0x124E, 0x124F),
    r(Reserved, 0x1257, 0x1257),
    r(Reserved, 0x1259, 0x1259),
    r(Reserved, 0x125E, 0x125F),
    r(Reserved, 0x1289, 0x1289),
    r(Reserved, 0x128E, 0x128F),
    r(Reserved, 0x12B1, 0x12B1),
    r(Reserved, 0x12B6, 0x12B7),
    r(Reserved, 0x12BF, 0x12BF),
    r(Reserved, 0x12C1, 0x12C1),
    r(Reserved, 0x12C6, 0x12C7),
    r(Reserved, 0x12D7, 0x12D7),
    r(Reserved, 0x1311, 0x1311),
    r(Reserved, 0x1316, 0x1317),
    r(Reserved, 0x135B, 0x135C),
    r(Reserved, 0x137D, 0x137F),
    r(Reserved, 0x139A, 0x139F),
    r(Reserved, 0x13F6, 0x13F7),
    r(Reserved, 0x13FE, 0x13FF),
    r(Reserved, 0x169D, 0x169F),
    r(Reserved, 0x16F9, 0x16FF),
    r(Reserved, 0x1716, 0x171E),
    r(Reserved, 0x1737, 0x173F),
    r(Reserved, 0x1754, 0x175F),
    r(Reserved, 0x176D, 0x176D),
    r(Reserved, 0x1771, 0x1771),
    r(Reserved, 0x1774, 0x177F),
    r(Reserved, 0x17DE, 0x17DF),
    r(Reserved, 0x17EA, 0x17EF),
    r(Reserved, 0x17FA, 0x17FF),
    r(Reserved, 0x181A, 0x181F),
    r(Reserved, 0x1879, 0x187F),
    r(Reserved, 0x18AB, 0x18AF),
    r(Reserved, 0x18F6, 0x18FF),
    r(Reserved, 0x191F, 0x191F),
    r(Reserved, 0x192C, 0x192F),
    r(Reserved, 0x193C, 0x193F),
    r(Reserved, 0x1941, 0x1943),
    r(Reserved, 0x196E, 0x196F),
    r(Reserved, 0x1975, 0x197F),
    r(Reserved, 0x19AC, 0x19AF),
    r(Reserved, 0x19CA, 0x19CF),
    r(Reserved, 0x19DB, 0x19DD),
    r(Reserved, 0x1A1C, 0x1A1D),
    r(Reserved, 0x1A5F, 0x1A5F),
    r(Reserved, 0x1A7D, 0x1A7E),
    r(Reserved, 0x1A8A, 0x1A8F),
    r(Reserved, 0x1A9A, 0x1A9F),
    r(Reserved, 0x1AAE, 0x1AAF),
    r(Reserved, 0x1ACF, 0x1AFF),
    r(Reserved, 0x1B4D, 0x1B4F),
    r(Reserved, 0x1B7F, 0x1B7F),
    r(Reserved, 0x1BF4, 0x1BFB),
    r(Reserved, 0x1C38, 0x1C3A),
    r(Reserved, 0x1C4A, 0x1C4C),
    r(Reserved, 0x1C89, 0x1C8F),
    r(Reserved, 0x1CBB, 0x1CBC),
    r(Reserved, 0x1CC8, 0x1CCF),
    r(Reserved, 0x1CFB, 0x1CFF),
    r(Reserved, 0x1F16, 0x1F17),
    r(Reserved, 0x1F1E, 0x1F1F),
    r(Reserved, 0x1F46, 0x1F47),
    r(Reserved, 0x1F4E, 0x1F4F),
    r(Reserved, 0x1F58, 0x1F58),
    r(Reserved, 0x1F5A, 0x1F5A),
    r(Reserved, 0x1F5C, 0x1F5C),
    r(Reserved, 0x1F5E, 0x1F5E),
    r(Reserved, 0x1F7E, 0x1F7F),
    r(Reserved, 0x1FB5, 0x1FB5),
    r(Reserved, 0x1FC5, 0x1FC5),
    r(Reserved, 0x1FD4, 0x1FD5),
    r(Reserved, 0x1FDC, 0x1FDC),
    r(Reserved, 0x1FF0, 0x1FF1),
    r(Reserved, 0x1FF5, 0x1FF5),
    r(Reserved, 0x1FFF, 0x1FFF),
    r(Reserved, 0x2065, 0x2065),
    r(Reserved, 0x2072, 0x2073),
    r(Reserved, 0x208F, 0x208F),
    r(Reserved, 0x209D, 0x209F),
    r(Reserved, 0x20C1, 0x20CF),
    r(Reserved, 0x20F1, 0x20FF),
    r(Reserved, 0x218C, 0x218F),
    r(Reserved, 0x2427, 0x243F),
    r(Reserved, 0x244B, 0x245F),
    r(Reserved, 0x2B74, 0x2B75),
    r(Reserved, 0x2B96, 0x2B96),
    r(Reserved, 0x2CF4, 0x2CF8),
    r(Reserved, 0x2D26, 0x2D26),
    r(Reserved, 0x2D28, 0x2D2C),
    r(Reserved, 0x2D2E, 0x2D2F),
    r(Reserved, 0x2D68, 0x2D6E),
    r(Reserved, 0x2D71, 0x2D7E),
    r(Reserved, 0x2D97, 0x2D9F),
    r(Reserved, 0x2DA7, 0x2DA7),
    r(Reserved, 0x2DAF, 0x2DAF),
    r(Reserved, 0x2DB7, 0x2DB7),
    r(Reserved, 0x2DBF, 0x2DBF),
    r(Reserved, 0x2DC7, 0x2DC7),
    r(Reserved, 0x2DCF, 0x2DCF),
    r(Reserved, 0x2DD7, 0x2DD7),
    r(Reserved, 0x2DDF, 0x2DDF),
    r(Reserved, 0x2E5E, 0x2E7F),
    r(Reserved, 0x2E9A, 0x2E9A),
    r(Reserved, 0x2EF4, 0x2EFF),
    r(Reserved, 0x2FD6, 0x2FDF),
    r(Reserved, 0x2FE0, 0x2FEF),
    r(Reserved, 0x2FFC, 0x2FFF),
    r(Reserved, 0x3040, 0x3040),
    r(Reserved, 0x3097, 0x3098),
    r(Reserved, 0x3100, 0x3104),
    r(Reserved, 0x3130, 0x3130),
    r(Reserved, 0x318F, 0x318F),
    r(Reserved, 0x31E4, 0x31EF),
    r(Reserved, 0x321F, 0x321F),
    r(Reserved, 0xA48D, 0xA48F),
    r(Reserved, 0xA4C7, 0xA4CF),
    r(Reserved, 0xA62C, 0xA63F),
    r(Reserved, 0xA6F8, 0xA6FF),
    r(Reserved, 0xA7CB, 0xA7CF),
    r(Reserved, 0xA7D2, 0xA7D2),
    r(Reserved, 0xA7D4, 0xA7D4),
    r(Reserved, 0xA7DA, 0xA7F1),
    r(Reserved, 0xA82D, 0xA82F),
    r(Reserved, 0xA83A, 0xA83F),
    r(Reserved, 0xA878, 0xA87F),
    r(Reserved, 0xA8C6, 0xA8CD),
    r(Reserved, 0xA8DA, 0xA8DF),
    r(Reserved, 0xA954, 0xA95E),
    r(Reserved, 0xA97D, 0xA97F),
    r(Reserved, 0xA9CE, 0xA9CE),
    r(Reserved, 0xA9DA, 0xA9DD),
    r(Reserved, 0xA9FF, 0xA9FF),
    r(Reserved, 0xAA37, 0xAA3F),
    r(Reserved, 0xAA4E, 0xAA4F),
    r(Reserved, 0xAA5A, 0xAA5B),
    r(Reserved, 0xAAC3, 0xAADA),
    r(Reserved, 0xAAF7, 0xAAFF),
    r(Reserved, 0xAB00, 0xAB00),
    r(Reserved, 0xAB07, 0xAB08),
    r(Reserved, 0xAB0F, 0xAB10),
    r(Reserved, 0xAB17, 0xAB1F),
    r(Reserved, 0xAB27, 0xAB27),
    r(Reserved, 0xAB2F, 0xAB2F),
    r(Reserved, 0xAB6C, 0xAB6F),
    r(Reserved, 0xABEE, 0xABEF),
    r(Reserved, 0xABFA, 0xABFF),
    r(Reserved, 0xD7A4, 0xD7AF),
    r(Reserved, 0xD7C7, 0xD7CA),
    r(Reserved, 0xD7FC, 0xD7FF),
    r(Surrogate, 0xD800, 0xDB7F),
    r(Surrogate, 0xDB80, 0xDBFF),
    r(Surrogate, 0xDC00, 0xDFFF),
    r(Reserved, 0xFA6E, 0xFA6F),
    r(Reserved, 0xFADA, 0xFAFF),
    r(Reserved, 0xFB07, 0xFB12),
    r(Reserved, 0xFB18, 0xFB1C),
    r(Reserved, 0xFB37, 0xFB37),
    r(Reserved, 0xFB3D, 0xFB3D),
    r(Reserved, 0xFB3F, 0xFB3F),
    r(Reserved, 0xFB42, 0xFB42),
    r(Reserved, 0xFB45, 0xFB45),
    r(Reserved, 0xFBC3, 0xFBD2),
    r(Reserved, 0xFD90, 0xFD91),
    r(Reserved, 0xFDC8, 0xFDCE),
    r(Noncharacter, 0xFDD0, 0xFDEF),
    r(Reserved, 0xFE1A, 0xFE1F),
    r(Reserved, 0xFE53, 0xFE53),
    r(Reserved, 0xFE67, 0xFE67),
    r(Reserved, 0xFE6C, 0xFE6F),
    r(Reserved, 0xFE75, 0xFE75),
    r(Reserved, 0xFEFD, 0xFEFE),
    r(Reserved, 0xFF00, 0xFF00),
    r(Reserved, 0xFFBF, 0xFFC1),
    r(Reserved, 0xFFC8, 0xFFC9),
    r(Reserved, 0xFFD0, 0xFFD1),
    r(Reserved, 0xFFD8, 0xFFD9),
    r(Reserved, 0xFFDD, 0xFFDF),
    r(Reserved, 0xFFE7, 0xFFE7),
    r(Reserved, 0xFFEF, 0xFFEF),
    r(Reserved, 0xFFF0, 0xFFF8),
    r(Noncharacter, 0xFFFE, 0xFFFF),
    r(Reserved, 0x1000C, 0x1000C),
    r(Reserved, 0x10027, 0x10027),
    r(Reserved, 0x1003B, 0x1003B),
    r(Reserved, 0x1003E, 0x1003E),
    r(Reserved, 0x1004E, 0x1004F),
    r(Reserved, 0x1005E, 0x1007F),
    r(Reserved, 0x100FB, 0x100FF),
    r(Reserved, 0x10103, 0x10106),
    r(Reserved, 0x10134, 0x10136),
    r(Reserved, 0x1018F, 0x1018F),
    r(Reserved, 0x1019D, 0x1019F),
    r(Reserved, 0x101A1, 0x101CF),
    r(Reserved, 0x101FE, 0x101FF),
    r(Reserved, 0x10200, 0x1027F),
    r(Reserved, 0x1029D, 0x1029F),
    r(Reserved, 0x102D1, 0x102DF),
    r(Reserved, 0x102FC, 0x102FF),
    r(Reserved, 0x10324, 0x1032C),
    r(Reserved, 0x1034B, 0x1034F),
    r(Reserved, 0x1037B, 0x1037F),
    r(Reserved, 0x1039E, 0x1039E),
    r(Reserved, 0x103C4, 0x103C7),
    r(Reserved, 0x103D6, 0x103DF),
    r(Reserved, 0x103E0, 0x103FF),
    r(Reserved, 0x1049E, 0x1049F),
    r(Reserved, 0x104AA, 0x104AF),
    r(Reserved, 0x104D4, 0x104D7),
    r(Reserved, 0x104FC, 0x104FF),
    r(Reserved, 0x10528, 0x1052F),
    r(Reserved, 0x10564, 0x1056E),
    r(Reserved, 0x1057B, 0x1057B),
    r(Reserved, 0x1058B, 0x1058B),
    r(Reserved, 0x10593, 0x10593),
    r(Reserved, 0x10596, 0x10596),
    r(Reserved, 0x105A2, 0x105A2),
    r(Reserved, 0x105B2, 0x105B2),
    r(Reserved, 0x105BA, 0x105BA),
    r(Reserved, 0x105BD, 0x105BF),
    r(Reserved, 0x105C0, 0x105FF),
    r(Reserved, 0x10737, 0x1073F),
    r(Reserved, 0x10756, 0x1075F),
    r(Reserved, 0x10768, 0x1077F),
    r(Reserved, 0x10786, 0x10786),
    r(Reserved, 0x107B1, 0x107B1),
    r(Reserved, 0x107BB, 0x107BF),
    r(Reserved, 0x107C0, 0x107FF),
    r(Reserved, 0x10806, 0x10807),
    r(Reserved, 0x10809, 0x10809),
    r(Reserved, 0x10836, 0x10836),
    r(Reserved, 0x10839, 0x1083B),
    r(Reserved, 0x1083D, 0x1083E),
    r(Reserved, 0x10856, 0x10856),
    r(Reserved, 0x1089F, 0x108A6),
    r(Reserved, 0x108B0, 0x108DF),
    r(Reserved, 0x108F3, 0x108F3),
    r(Reserved, 0x108F6, 0x108FA),
    r(Reserved, 0x1091C, 0x1091E),
    r(Reserved, 0x1093A, 0x1093E),
    r(Reserved, 0x10940, 0x1097F),
    r(Reserved, 0x109B8, 0x109BB),
    r(Reserved, 0x109D0, 0x109D1),
    r(Reserved, 0x10A04, 0x10A04),
    r(Reserved, 0x10A07, 0x10A0B),
    r(Reserved, 0x10A14, 0x10A14),
    r(Reserved, 0x10A18, 0x10A18),
    r(Reserved, 0x10A36, 0x10A37),
    r(Reserved, 0x10A3B, 0x10A3E),
    r(Reserved, 0x10A49, 0x10A4F),
    r(Reserved, 0x10A59, 0x10A5F),
    r(Reserved, 0x10AA0, 0x10ABF),
    r(Reserved, 0x10AE7, 0x10AEA),
    r(Reserved, 0x10AF7, 0x10AFF),
    r(Reserved, 0x10B36, 0x10B38),
    r(Reserved, 0x10B56, 0x10B57),
    r(Reserved, 0x10B73, 0x10B77),
    r(Reserved, 0x10B92, 0x10B98),
    r(Reserved, 0x10B9D, 0x10BA8),
    r(Reserved, 0x10BB0, 0x10BFF),
    r(Reserved, 0x10C49, 0x10C4F),
    r(Reserved, 0x10C50, 0x10C7F),
    r(Reserved, 0x10CB3, 0x10CBF),
    r(Reserved, 0x10CF3, 0x10CF9),
    r(Reserved, 0x10D28, 0x10D2F),
    r(Reserved, 0x10D3A, 0x10D3F),
    r(Reserved, 0x10D40, 0x10E5F),
    r(Reserved, 0x10E7F, 0x10E7F),
    r(Reserved, 0x10EAA, 0x10EAA),
    r(Reserved, 0x10EAE, 0x10EAF),
    r(Reserved, 0x10EB2, 0x10EBF),
    r(Reserved, 0x10EC0, 0x10EFF),
    r(Reserved, 0x10F28, 0x10F2F),
    r(Reserved, 0x10F5A, 0x10F6F),
    r(Reserved, 0x10F8A, 0x10FAF),
    r(Reserved, 0x10FCC, 0x10FDF),
    r(Reserved, 0x10FF7, 0x10FFF),
    r(Reserved, 0x1104E, 0x11051),
    r(Reserved, 0x11076, 0x1107E),
    r(Reserved, 0x110C3, 0x110CC),
    r(Reserved, 0x110CE, 0x110CF),
    r(Reserved, 0x110E9, 0x110EF),
    r(Reserved, 0x110FA, 0x110FF),
    r(Reserved, 0x11135, 0x11135),
    r(Reserved, 0x11148, 0x1114F),
    r(Reserved, 0x11177, 0x1117F),
    r(Reserved, 0x111E0, 0x111E0),
    r(Reserved, 0x111F5, 0x111FF),
    r(Reserved, 0x11212, 0x11212),
    r(Reserved, 0x1123F, 0x1124F),
    r(Reserved, 0x11250, 0x1127F),
    r(Reserved, 0x11287, 0x11287),
    r(Reserved, 0x11289, 0x11289),
    r(Reserved, 0x1128E, 0x1128E),
    r(Reserved, 0x1129E, 0x1129E),
    r(Reserved, 0x112AA, 0x112AF),
    r(Reserved, 0x112EB, 0x112EF),
    r(Reserved, 0x112FA, 0x112FF),
    r(Reserved, 0x11304, 0x11304),
    r(Reserved, 0x1130D, 0x1130E),
    r(Reserved, 0x11311, 0x11312),
    r(Reserved, 0x11329, 0x11329),
    r(Reserved, 0x11331, 0x11331),
    r(Reserved, 0x11334, 0x11334),
    r(Reserved, 0x1133A, 0x1133A),
    r(Reserved, 0x11345, 0x11346),
    r(Reserved, 0x11349, 0x1134A),
    r(Reserved, 0x1134E, 0x1134F),
    r(Reserved, 0x11351, 0x11356),
    r(Reserved, 0x11358, 0x1135C),
    r(Reserved, 0x11364, 0x11365),
    r(Reserved, 0x1136D, 0x1136F),
    r(Reserved, 0x11375, 0x1137F),
    r(Reserved, 0x11380, 0x113FF),
    r(Reserved, 0x1145C, 0x1145C),
    r(Reserved, 0x11462, 0x1147F),
    r(Reserved, 0x114C8, 0x114CF),
    r(Reserved, 0x114DA, 0x114DF),
    r(Reserved, 0x114E0, 0x1157F),
    r(Reserved, 0x115B6, 0x115B7),
    r(Reserved, 0x115DE, 0x115FF),
    r(Reserved, 0x11645, 0x1164F),
    r(Reserved, 0x1165A, 0x1165F),
    r(Reserved, 0x1166D, 0x1167F),
    r(Reserved, 0x116BA, 0x116BF),
    r(Reserved, 0x116CA, 0x116CF),
    r(Reserved, 0x116D0, 0x116FF),
    r(Reserved, 0x1171B, 0x1171C),
    r(Reserved, 0x1172C, 0x1172F),
    r(Reserved, 0x11747, 0x1174F),
    r(Reserved, 0x11750, 0x117FF),
    r(Reserved, 0x1183C, 0x1184F),
    r(Reserved, 0x11850, 0x1189F),
    r(Reserved, 0x118F3, 0x118FE),
    r(Reserved, 0x11907, 0x11908),
    r(Reserved, 0x1190A, 0x1190B),
    r(Reserved, 0x11914, 0x11914),
    r(Reserved, 0x11917, 0x11917),
    r(Reserved, 0x11936, 0x11936),
    r(Reserved, 0x11939, 0x1193A),
    r(Reserved, 0x11947, 0x1194F),
    r(Reserved, 0x1195A, 0x1195F),
    r(Reserved, 0x11960, 0x1199F),
    r(Reserved, 0x119A8, 0x119A9),
    r(Reserved, 0x119D8, 0x119D9),
    r(Reserved, 0x119E5, 0x119FF),
    r(Reserved, 0x11A48, 0x11A4F),
    r(Reserved, 0x11AA3, 0x11AAF),
    r(Reserved, 0x11AF9, 0x11AFF),
    r(Reserved, 0x11B00, 0x11BFF),
    r(Reserved, 0x11C09, 0x11C09),
    r(Reserved, 0x11C37, 0x11C37),
    r(Reserved, 0x11C46, 0x11C4F),
    r(Reserved, 0x11C6D, 0x11C6F),
    r(Reserved, 0x11C90, 0x11C91),
    r(Reserved, 0x11CA8, 0x11CA8),
    r(Reserved, 0x11CB7, 0x11CBF),
    r(Reserved, 0x11CC0, 0x11CFF),
    r(Reserved, 0x11D07, 0x11D07),
    r(Reserved, 0x11D0A, 0x11D0A),
    r(Reserved, 0x11D37, 0x11D39),
    r(Reserved, 0x11D3B, 0x11D3B),
    r(Reserved, 0x11D3E, 0x11D3E),
    r(Reserved, 0x11D48, 0x11D4F),
    r(Reserved, 0x11D5A, 0x11D5F),
    r(Reserved, 0x11D66, 0x11D66),
    r(Reserved, 0x11D69, 0x11D69),
    r(Reserved, 0x11D8F, 0x11D8F),
    r(Reserved, 0x11D92, 0x11D92),
    r(Reserved, 0x11D99, 0x11D9F),
    r(Reserved, 0x11DAA, 0x11DAF),
    r(Reserved, 0x11DB0, 0x11EDF),
    r(Reserved, 0x11EF9, 0x11EFF),
    r(Reserved, 0x11F00, 0x11FAF),
    r(Reserved, 0x11FB1, 0x11FBF),
    r(Reserved, 0x11FF2, 0x11FFE),
    r(Reserved, 0x1239A, 0x123FF),
    r(Reserved, 0x1246F, 0x1246F),
    r(Reserved, 0x12475, 0x1247F),
    r(Reserved, 0x12544, 0x1254F),
    r(Reserved, 0x12550, 0x12F8F),
    r(Reserved, 0x12FF3, 0x12FFF),
    r(Reserved, 0x1342F, 0x1342F),
    r(Reserved, 0x13439, 0x1343F),
    r(Reserved, 0x13440, 0x143FF),
    r(Reserved, 0x14647, 0x1467F),
    r(Reserved, 0x14680, 0x167FF),
    r(Reserved, 0x16A39, 0x16A3F),
    r(Reserved, 0x16A5F, 0x16A5F),
    r(Reserved, 0x16A6A, 0x16A6D),
    r(Reserved, 0x16ABF, 0x16ABF),
    r(Reserved, 0x16ACA, 0x16ACF),
    r(Reserved, 0x16AEE, 0x16AEF),
    r(Reserved, 0x16AF6, 0x16AFF),
    r(Reserved, 0x16B46, 0x16B4F),
    r(Reserved, 0x16B5A, 0x16B5A),
    r(Reserved, 0x16B62, 0x16B62),
    r(Reserved, 0x16B78, 0x16B7C),
    r(Reserved, 0x16B90, 0x16E3F),
    r(Reserved, 0x16E9B, 0x16E9F),
    r(Reserved, 0x16EA0, 0x16EFF),
    r(Reserved, 0x16F4B, 0x16F4E),
    r(Reserved, 0x16F88, 0x16F8E),
    r(Reserved, 0x16FA0, 0x16FDF),
    r(Reserved, 0x16FE5, 0x16FEF),
    r(Reserved, 0x16FF2, 0x16FFF),
    r(Reserved, 0x187F8, 0x187FF),
    r(Reserved, 0x18CD6, 0x18CFF),
    r(Reserved, 0x18D09, 0x18D7F),
    r(Reserved, 0x18D80, 0x1AFEF),
    r(Reserved, 0x1AFF4, 0x1AFF4),
    r(Reserved, 0x1AFFC, 0x1AFFC),
    r(Reserved, 0x1AFFF, 0x1AFFF),
    r(Reserved, 0x1B123, 0x1B12F),
    r(Reserved, 0x1B130, 0x1B14F),
    r(Reserved, 0x1B153, 0x1B163),
    r(Reserved, 0x1B168, 0x1B16F),
    r(Reserved, 0x1B2FC, 0x1B2FF),
    r(Reserved, 0x1B300, 0x1BBFF),
    r(Reserved, 0x1BC6B, 0x1BC6F),
    r(Reserved, 0x1BC7D, 0x1BC7F),
    r(Reserved, 0x1BC89, 0x1BC8F),
    r(Reserved, 0x1BC9A, 0x1BC9B),
    r(Reserved, 0x1BCA4, 0x1BCAF),
    r(Reserved, 0x1BCB0, 0x1CEFF),
    r(Reserved, 0x1CF2E, 0x1CF2F),
    r(Reserved, 0x1CF47, 0x1CF4F),
    r(Reserved, 0x1CFC4, 0x1CFCF),
    r(Reserved, 0x1CFD0, 0x1CFFF),
    r(Reserved, 0x1D0F6, 0x1D0FF),
    r(Reserved, 0x1D127, 0x1D128),
    r(Reserved, 0x1D1EB, 0x1D1FF),
    r(Reserved, 0x1D246, 0x1D24F),
    r(Reserved, 0x1D250, 0x1D2DF),
    r(Reserved, 0x1D2F4, 0x1D2FF),
    r(Reserved, 0x1D357, 0x1D35F),
    r(Reserved, 0x1D379, 0x1D37F),
    r(Reserved, 0x1D380, 0x1D3FF),
    r(Reserved, 0x1D455, 0x1D455),
    r(Reserved, 0x1D49D, 0x1D49D),
    r(Reserved, 0x1D4A0, 0x1D4A1),
    r(Reserved, 0x1D4A3, 0x1D4A4),
    r(Reserved, 0x1D4A7, 0x1D4A8),
    r(Reserved, 0x1D4AD, 0x1D4AD),
    r(Reserved, 0x1D4BA, 0x1D4BA),
    r(Reserved, 0x1D4BC, 0x1D4BC),
    r(Reserved, 0x1D4C4, 0x1D4C4),
    r(Reserved, 0x1D506, 0x1D506),
    r(Reserved, 0x1D50B, 0x1D50C),
    r(Reserved, 0x1D515, 0x1D515),
    r(Reserved, 0x1D51D, 0x1D51D),
    r(Reserved, 0x1D53A, 0x1D53A),
    r(Reserved, 0x1D53F, 0x1D53F),
    r(Reserved, 0x1D545, 0x1D545),
    r(Reserved, 0x1D547, 0x1D549),
    r(Reserved, 0x1D551, 0x1D551),
    r(Reserved, 0x1D6A6, 0x1D6A7),
    r(Reserved, 0x1D7CC, 0x1D7CD),
    r(Reserved, 0x1DA8C, 0x1DA9A),
    r(Reserved, 0x1DAA0, 0x1DAA0),
    r(Reserved, 0x1DAB0, 0x1DEFF),
    r(Reserved, 0x1DF1F, 0x1DFFF),
    r(Reserved, 0x1E007, 0x1E007),
    r(Reserved, 0x1E019, 0x1E01A),
    r(Reserved, 0x1E022, 0x1E022),
    r(Reserved, 0x1E025, 0x1E025),
    r(Reserved, 0x1E02B, 0x1E02F),
    r(Reserved, 0x1E030, 0x1E0FF),
    r(Reserved, 0x1E12D, 0x1E12F),
    r(Reserved, 0x1E13E, 0x1E13F),
    r(Reserved, 0x1E14A, 0x1E14D),
    r(Reserved, 0x1E150, 0x1E28F),
    r(Reserved, 0x1E2AF, 0x1E2BF),
    r(Reserved, 0x1E2FA, 0x1E2FE),
    r(Reserved, 0x1E300, 0x1E7DF),
    r(Reserved, 0x1E7E7, 0x1E7E7),
    r(Reserved, 0x1E7EC, 0x1E7EC),
    r(Reserved, 0x1E7EF, 0x1E7EF),
    r(Reserved, 0x1E7FF, 0x1E7FF),
    r(Reserved, 0x1E8C5, 0x1E8C6),
    r(Reserved, 0x1E8D7, 0x1E8DF),
    r(Reserved, 0x1E8E0, 0x1E8FF),
    r(Reserved, 0x1E94C, 0x1E94F),
    r(Reserved, 0x1E95A, 0x1E95D),
    r(Reserved, 0x1E960, 0x1EC6F),
    r(Reserved, 0x1EC70, 0x1EC70),
    r(Reserved, 0x1ECB5, 0x1ECBF),
    r(Reserved, 0x1ECC0, 0x1ECFF),
    r(Reserved, 0x1ED00, 0x1ED00),
    r(Reserved, 0x1ED3E, 0x1ED4F),
    r(Reserved, 0x1ED50, 0x1EDFF),
    r(Reserved, 0x1EE04, 0x1EE04),
    r(Reserved, 0x1EE20, 0x1EE20),
    r(Reserved, 0x1EE23, 0x1EE23),
    r(Reserved, 0x1EE25, 0x1EE26),
    r(Reserved, 0x1EE28, 0x1EE28),
    r(Reserved, 0x1EE33, 0x1EE33),
    r(Reserved, 0x1EE38, 0x1EE38),
    r(Reserved, 0x1EE3A, 0x1EE3A),
    r(Reserved, 0x1EE3C, 0x1EE41),
    r(Reserved, 0x1EE43, 0x1EE46),
    r(Reserved, 0x1EE48, 0x1EE48),
    r(Reserved, 0x1EE4A, 0x1EE4A),
    r(Reserved, 0x1EE4C, 0x1EE4C),
    r(Reserved, 0x1EE50, 0x1EE50),
    r(Reserved, 0x1EE53, 0x1EE53),
    r(Reserved, 0x1EE55, 0x1EE56),
    r(Reserved, 0x1EE58, 0x1EE58),
    r(Reserved, 0x1EE5A, 0x1EE5A),
    r(Reserved, 0x1EE5C, 0x1EE5C),
    r(Reserved, 0x1EE5E, 0x1EE5E),
    r(Reserved, 0x1EE60, 0x1EE60),
    r(Reserved, 0x1EE63, 0x1EE63),
    r(Reserved, 0x1EE65, 0x1EE66),
    r(Reserved, 0x1EE6B, 0x1EE6B),
    r(Reserved, 0x1EE73, 0x1EE73),
    r(Reserved, 0x1EE78, 0x1EE78),
    r(Reserved, 0x1EE7D, 0x1EE7D),
    r(Reserved, 0x1EE7F, 0x1EE7F),
    r(Reserved, 0x1EE8A, 0x1EE8A),
    r(Reserved, 0x1EE9C, 0x1EEA0),
    r(Reserved, 0x1EEA4, 0x1EEA4),
    r(Reserved, 0x1EEAA, 0x1EEAA),
    r(Reserved, 0x1EEBC, 0x1EEEF),
    r(Reserved, 0x1EEF2, 0x1EEFF),
    r(Reserved, 0x1EF00, 0x1EFFF),
    r(Reserved, 0x1F02C, 0x1F02F),
    r(Reserved, 0x1F094, 0x1F09F),
    r(Reserved, 0x1F0AF, 0x1F0B0),
    r(Reserved, 0x1F0C0, 0x1F0C0),
    r(Reserved, 0x1F0D0, 0x1F0D0),
    r(Reserved, 0x1F0F6, 0x1F0FF),
    r(Reserved, 0x1F1AE, 0x1F1E5),
    r(Reserved, 0x1F203, 0x1F20F),
    r(Reserved, 0x1F23C, 0x1F23F),
    r(Reserved, 0x1F249, 0x1F24F),
    r(Reserved, 0x1F252, 0x1F25F),
    r(Reserved, 0x1F266, 0x1F2FF),
    r(Reserved, 0x1F6D8, 0x1F6DC),
    r(Reserved, 0x1F6ED, 0x1F6EF),
    r(Reserved, 0x1F6FD, 0x1F6FF),
    r(Reserved, 0x1F774, 0x1F77F),
    r(Reserved, 0x1F7D9, 0x1F7DF),
    r(Reserved, 0x1F7EC, 0x1F7EF),
    r(Reserved, 0x1F7F1, 0x1F7FF),
    r(Reserved, 0x1F80C, 0x1F80F),
    r(Reserved, 0x1F848, 0x1F84F),
    r(Reserved, 0x1F85A, 0x1F85F),
    r(Reserved, 0x1F888, 0x1F88F),
    r(Reserved, 0x1F8AE, 0x1F8AF),
    r(Reserved, 0x1F8B2, 0x1F8FF),
    r(Reserved, 0x1FA54, 0x1FA5F),
    r(Reserved, 0x1FA6E, 0x1FA6F),
    r(Reserved, 0x1FA75, 0x1FA77),
    r(Reserved, 0x1FA7D, 0x1FA7F),
    r(Reserved, 0x1FA87, 0x1FA8F),
    r(Reserved, 0x1FAAD, 0x1FAAF),
    r(Reserved, 0x1FABB, 0x1FABF),
    r(Reserved, 0x1FAC6, 0x1FACF),
    r(Reserved, 0x1FADA, 0x1FADF),
    r(Reserved, 0x1FAE8, 0x1FAEF),
    r(Reserved, 0x1FAF7, 0x1FAFF),
    r(Reserved, 0x1FB93, 0x1FB93),
    r(Reserved, 0x1FBCB, 0x1FBEF),
    r(Reserved, 0x1FBFA, 0x1FBFF),
    r(Reserved, 0x1FC00, 0x1FFFD),
    r(Noncharacter, 0x1FFFE, 0x1FFFF),
    r(Reserved, 0x2A6E0, 0x2A6FF),
    r(Reserved, 0x2B739, 0x2B73F),
    r(Reserved, 0x2B81E, 0x2B81F),
    r(Reserved, 0x2CEA2, 0x2CEAF),
    r(Reserved, 0x2EBE1, 0x2EBEF),
    r(Reserved, 0x2EBF0, 0x2F7FF),
    r(Reserved, 0x2FA1E, 0x2FA1F),
    r(Reserved, 0x2FA20, 0x2FFFD),
    r(Noncharacter, 0x2FFFE, 0x2FFFF),
    r(Reserved, 0x3134B, 0x3134F),
    r(Reserved, 0x31350, 0x3FFFD),
    r(Noncharacter, 0x3FFFE, 0x3FFFF),
    r(Reserved, 0x40000, 0x4FFFD),
    r(Noncharacter, 0x4FFFE, 0x4FFFF),
    r(Reserved, 0x50000, 0x5FFFD),
    r(Noncharacter, 0x5FFFE, 0x5FFFF),
    r(Reserved, 0x60000, 0x6FFFD),
    r(Noncharacter, 0x6FFFE, 0x6FFFF),
    r(Reserved, 0x70000, 0x7FFFD),
    r(Noncharacter, 0x7FFFE, 0x7FFFF),
    r(Reserved, 0x80000, 0x8FFFD),
    r(Noncharacter, 0x8FFFE, 0x8FFFF),
    r(Reserved, 0x90000, 0x9FFFD),
    r(Noncharacter, 0x9FFFE, 0x9FFFF),
    r(Reserved, 0xA0000, 0xAFFFD),
    r(Noncharacter, 0xAFFFE, 0xAFFFF),
    r(Reserved, 0xB0000, 0xBFFFD),
    r(Noncharacter, 0xBFFFE, 0xBFFFF),
    r(Reserved, 0xC0000, 0xCFFFD),
    r(Noncharacter, 0xCFFFE, 0xCFFFF),
    r(Reserved, 0xD0000, 0xDFFFD),
    r(Noncharacter, 0xDFFFE, 0xDFFFF),
    r(Reserved, 0xE0000, 0xE0000),
    r(Reserved, 0xE0002, 0xE001F),
    r(Reserved, 0xE0080, 0xE00FF),
    r(Reserved, 0xE01F0, 0xEFFFD),
    r(Noncharacter, 0xEFFFE, 0xEFFFF),
    r(Noncharacter, 0xFFFFE, 0xFFFFF),
    r(Noncharacter, 0x10FFFE, 0x10FFFF),
];
