// Generated from the Unicode Character Database 14.0.0. Do not edit by hand.

use super::t;
use crate::tables::TypeEntry;

/// Identifier type ranges for assigned code points, sorted by first code point.
pub static IDENTIFIER_TYPE: &[TypeEntry] = &[
    t(0x0009, Some(0x000D), 0x200),
    t(0x0020, Some(0x0026), 0x200),
    t(0x0027, None, 0x011),
    t(0x0028, Some(0x002C), 0x200),
    t(0x002D, Some(0x002E), 0x011),
    t(0x002F, None, 0x200),
    t(0x0030, Some(0x0039), 0x401),
    t(0x003A, None, 0x011),
    t(0x003B, Some(0x0040), 0x200),
    t(0x0041, Some(0x005A), 0x401),
    t(0x005B, Some(0x005E), 0x200),
    t(0x005F, None, 0x401),
    t(0x0060, None, 0x200),
    t(0x0061, Some(0x007A), 0x401),
    t(0x007B, Some(0x007E), 0x200),
    t(0x0085, None, 0x200),
    t(0x00A0, None, 0x100),
    t(0x00A1, Some(0x00A7), 0x200),
    t(0x00A8, None, 0x100),
    t(0x00A9, None, 0x200),
    t(0x00AA, None, 0x100),
    t(0x00AB, Some(0x00AC), 0x200),
    t(0x00AD, None, 0x800),
    t(0x00AE, None, 0x200),
    t(0x00AF, None, 0x100),
    t(0x00B0, Some(0x00B1), 0x200),
    t(0x00B2, Some(0x00B5), 0x100),
    t(0x00B6, None, 0x200),
    t(0x00B7, None, 0x011),
    t(0x00B8, Some(0x00BA), 0x100),
    t(0x00BB, None, 0x200),
    t(0x00BC, Some(0x00BE), 0x100),
    t(0x00BF, None, 0x200),
    t(0x00C0, Some(0x00D6), 0x401),
    t(0x00D7, None, 0x200),
    t(0x00D8, Some(0x00F6), 0x401),
    t(0x00F7, None, 0x200),
    t(0x00F8, Some(0x0131), 0x401),
    t(0x0132, Some(0x0133), 0x100),
    t(0x0134, Some(0x013E), 0x401),
    t(0x013F, Some(0x0140), 0x100),
    t(0x0141, Some(0x0148), 0x401),
    t(0x0149, None, 0x002),
    t(0x014A, Some(0x017E), 0x401),
    t(0x017F, None, 0x100),
    t(0x0180, None, 0x004),
    t(0x0181, Some(0x018C), 0x080),
    t(0x018D, None, 0x00C),
    t(0x018E, None, 0x080),
    t(0x018F, None, 0x401),
    t(0x0190, Some(0x019F), 0x080),
    t(0x01A0, Some(0x01A1), 0x401),
    t(0x01A2, Some(0x01A9), 0x080),
    t(0x01AA, Some(0x01AB), 0x00C),
    t(0x01AC, Some(0x01AE), 0x080),
    t(0x01AF, Some(0x01B0), 0x401),
    t(0x01B1, Some(0x01B8), 0x080),
    t(0x01B9, None, 0x008),
    t(0x01BA, Some(0x01BB), 0x00C),
    t(0x01BC, Some(0x01BD), 0x080),
    t(0x01BE, None, 0x00C),
    t(0x01BF, None, 0x008),
    t(0x01C0, Some(0x01C3), 0x004),
    t(0x01C4, Some(0x01CC), 0x100),
    t(0x01CD, Some(0x01DC), 0x401),
    t(0x01DD, None, 0x080),
    t(0x01DE, Some(0x01E3), 0x401),
    t(0x01E4, Some(0x01E5), 0x080),
    t(0x01E6, Some(0x01F0), 0x401),
    t(0x01F1, Some(0x01F3), 0x100),
    t(0x01F4, Some(0x01F5), 0x401),
    t(0x01F6, Some(0x01F7), 0x008),
    t(0x01F8, Some(0x021B), 0x401),
    t(0x021C, Some(0x021D), 0x008),
    t(0x021E, Some(0x021F), 0x401),
    t(0x0220, Some(0x0225), 0x080),
    t(0x0226, Some(0x0233), 0x401),
    t(0x0234, Some(0x0236), 0x004),
    t(0x0237, Some(0x024F), 0x080),
    t(0x0250, Some(0x0252), 0x004),
    t(0x0253, Some(0x0254), 0x084),
    t(0x0255, None, 0x004),
    t(0x0256, Some(0x0257), 0x084),
    t(0x0258, None, 0x004),
    t(0x0259, None, 0x401),
    t(0x025A, None, 0x004),
    t(0x025B, None, 0x084),
    t(0x025C, Some(0x0262), 0x004),
    t(0x0263, None, 0x084),
    t(0x0264, Some(0x0267), 0x004),
    t(0x0268, Some(0x0269), 0x084),
    t(0x026A, Some(0x0271), 0x004),
    t(0x0272, None, 0x084),
    t(0x0273, Some(0x0276), 0x004),
    t(0x0277, None, 0x00C),
    t(0x0278, Some(0x027B), 0x004),
    t(0x027C, None, 0x00C),
    t(0x027D, Some(0x0288), 0x004),
    t(0x0289, None, 0x084),
    t(0x028A, Some(0x0291), 0x004),
    t(0x0292, None, 0x084),
    t(0x0293, Some(0x029D), 0x004),
    t(0x029E, None, 0x00C),
    t(0x029F, Some(0x02AF), 0x004),
    t(0x02B0, Some(0x02B8), 0x100),
    t(0x02B9, Some(0x02BA), 0x004),
    t(0x02BB, Some(0x02BC), 0x401),
    t(0x02BD, Some(0x02C1), 0x004),
    t(0x02C2, Some(0x02C5), 0x200),
    t(0x02C6, Some(0x02D1), 0x004),
    t(0x02D2, Some(0x02D7), 0x200),
    t(0x02D8, Some(0x02DD), 0x100),
    t(0x02DE, Some(0x02DF), 0x200),
    t(0x02E0, Some(0x02E4), 0x100),
    t(0x02E5, Some(0x02EB), 0x200),
    t(0x02EC, None, 0x401),
    t(0x02ED, None, 0x200),
    t(0x02EE, None, 0x004),
    t(0x02EF, Some(0x02FF), 0x200),
    t(0x0300, Some(0x0304), 0x401),
    t(0x0305, None, 0x080),
    t(0x0306, Some(0x030C), 0x401),
    t(0x030D, None, 0x080),
    t(0x030E, None, 0x004),
    t(0x030F, Some(0x0311), 0x401),
    t(0x0312, None, 0x004),
    t(0x0313, Some(0x0314), 0x401),
    t(0x0315, None, 0x004),
    t(0x0316, None, 0x080),
    t(0x0317, Some(0x031A), 0x004),
    t(0x031B, None, 0x401),
    t(0x031C, Some(0x0320), 0x004),
    t(0x0321, Some(0x0322), 0x080),
    t(0x0323, Some(0x0328), 0x401),
    t(0x0329, Some(0x032C), 0x004),
    t(0x032D, Some(0x032E), 0x401),
    t(0x032F, None, 0x004),
    t(0x0330, Some(0x0331), 0x401),
    t(0x0332, None, 0x080),
    t(0x0333, None, 0x004),
    t(0x0334, None, 0x080),
    t(0x0335, None, 0x401),
    t(0x0336, None, 0x080),
    t(0x0337, None, 0x004),
    t(0x0338, Some(0x0339), 0x401),
    t(0x033A, Some(0x033F), 0x004),
    t(0x0340, Some(0x0341), 0x100),
    t(0x0342, None, 0x401),
    t(0x0343, Some(0x0344), 0x100),
    t(0x0345, None, 0x401),
    t(0x0346, Some(0x034E), 0x004),
    t(0x034F, None, 0x800),
    t(0x0350, Some(0x0357), 0x004),
    t(0x0358, None, 0x080),
    t(0x0359, Some(0x0362), 0x004),
    t(0x0363, Some(0x0373), 0x008),
    t(0x0374, None, 0x100),
    t(0x0375, None, 0x011),
    t(0x0376, Some(0x0377), 0x008),
    t(0x037A, None, 0x100),
    t(0x037B, Some(0x037D), 0x401),
    t(0x037E, None, 0x100),
    t(0x037F, None, 0x008),
    t(0x0384, Some(0x0385), 0x100),
    t(0x0386, None, 0x401),
    t(0x0387, None, 0x100),
    t(0x0388, Some(0x038A), 0x401),
    t(0x038C, None, 0x401),
    t(0x038E, Some(0x03A1), 0x401),
    t(0x03A3, Some(0x03CE), 0x401),
    t(0x03CF, None, 0x004),
    t(0x03D0, Some(0x03D6), 0x100),
    t(0x03D7, None, 0x004),
    t(0x03D8, Some(0x03E1), 0x008),
    t(0x03E2, Some(0x03EF), 0x020),
    t(0x03F0, Some(0x03F2), 0x100),
    t(0x03F3, None, 0x00C),
    t(0x03F4, Some(0x03F5), 0x100),
    t(0x03F6, None, 0x200),
    t(0x03F7, Some(0x03F8), 0x008),
    t(0x03F9, None, 0x100),
    t(0x03FA, Some(0x03FB), 0x008),
    t(0x03FC, Some(0x045F), 0x401),
    t(0x0460, Some(0x0481), 0x008),
    t(0x0482, None, 0x208),
    t(0x0483, None, 0x008),
    t(0x0484, Some(0x0487), 0x00C),
    t(0x0488, Some(0x0489), 0x208),
    t(0x048A, Some(0x04FF), 0x401),
    t(0x0500, Some(0x050F), 0x008),
    t(0x0510, Some(0x0529), 0x401),
    t(0x052A, Some(0x052D), 0x008),
    t(0x052E, Some(0x052F), 0x401),
    t(0x0531, Some(0x0556), 0x401),
    t(0x0559, None, 0x401),
    t(0x055A, Some(0x055F), 0x200),
    t(0x0560, None, 0x004),
    t(0x0561, Some(0x0586), 0x401),
    t(0x0587, None, 0x100),
    t(0x0588, None, 0x004),
    t(0x0589, None, 0x200),
    t(0x058A, None, 0x011),
    t(0x058D, Some(0x058F), 0x200),
    t(0x0591, Some(0x05A1), 0x080),
    t(0x05A2, None, 0x088),
    t(0x05A3, Some(0x05B3), 0x080),
    t(0x05B4, None, 0x401),
    t(0x05B5, Some(0x05BD), 0x080),
    t(0x05BE, None, 0x200),
    t(0x05BF, None, 0x080),
    t(0x05C0, None, 0x200),
    t(0x05C1, Some(0x05C2), 0x080),
    t(0x05C3, None, 0x200),
    t(0x05C4, None, 0x080),
    t(0x05C5, None, 0x088),
    t(0x05C6, None, 0x208),
    t(0x05C7, None, 0x084),
    t(0x05D0, Some(0x05EA), 0x401),
    t(0x05EF, Some(0x05F2), 0x401),
    t(0x05F3, Some(0x05F4), 0x011),
    t(0x0600, Some(0x060F), 0x200),
    t(0x0610, Some(0x061A), 0x080),
    t(0x061B, None, 0x200),
    t(0x061C, None, 0x800),
    t(0x061D, Some(0x061F), 0x200),
    t(0x0620, Some(0x063F), 0x401),
    t(0x0640, None, 0x008),
    t(0x0641, Some(0x0655), 0x401),
    t(0x0656, Some(0x065F), 0x080),
    t(0x0660, Some(0x0669), 0x401),
    t(0x066A, Some(0x066D), 0x200),
    t(0x066E, Some(0x066F), 0x008),
    t(0x0670, Some(0x0672), 0x401),
    t(0x0673, None, 0x002),
    t(0x0674, None, 0x401),
    t(0x0675, Some(0x0678), 0x100),
    t(0x0679, Some(0x068D), 0x401),
    t(0x068E, None, 0x008),
    t(0x068F, Some(0x06A0), 0x401),
    t(0x06A1, None, 0x008),
    t(0x06A2, Some(0x06D3), 0x401),
    t(0x06D4, None, 0x200),
    t(0x06D5, None, 0x401),
    t(0x06D6, Some(0x06DC), 0x080),
    t(0x06DD, Some(0x06DE), 0x200),
    t(0x06DF, Some(0x06E4), 0x080),
    t(0x06E5, Some(0x06E6), 0x401),
    t(0x06E7, Some(0x06E8), 0x080),
    t(0x06E9, None, 0x200),
    t(0x06EA, Some(0x06ED), 0x080),
    t(0x06EE, Some(0x06FC), 0x401),
    t(0x06FD, Some(0x06FE), 0x011),
    t(0x06FF, None, 0x401),
    t(0x0700, Some(0x070D), 0x240),
    t(0x070F, None, 0x240),
    t(0x0710, Some(0x073F), 0x040),
    t(0x0740, Some(0x074A), 0x044),
    t(0x074D, Some(0x074F), 0x040),
    t(0x0750, Some(0x07B1), 0x401),
    t(0x07C0, Some(0x07E7), 0x040),
    t(0x07E8, Some(0x07EA), 0x048),
    t(0x07EB, Some(0x07F5), 0x040),
    t(0x07F6, Some(0x07F9), 0x240),
    t(0x07FA, None, 0x048),
    t(0x07FD, None, 0x040),
    t(0x07FE, Some(0x07FF), 0x240),
    t(0x0800, Some(0x082D), 0x020),
    t(0x0830, Some(0x083E), 0x220),
    t(0x0840, Some(0x085B), 0x040),
    t(0x085E, None, 0x240),
    t(0x0860, Some(0x086A), 0x040),
    t(0x0870, Some(0x0887), 0x401),
    t(0x0888, None, 0x200),
    t(0x0889, Some(0x088E), 0x401),
    t(0x0890, Some(0x0891), 0x200),
    t(0x0898, Some(0x089F), 0x080),
    t(0x08A0, Some(0x08AC), 0x401),
    t(0x08AD, Some(0x08B1), 0x008),
    t(0x08B2, None, 0x401),
    t(0x08B3, Some(0x08B4), 0x080),
    t(0x08B5, Some(0x08C9), 0x401),
    t(0x08CA, Some(0x08E1), 0x080),
    t(0x08E2, None, 0x200),
    t(0x08E3, Some(0x0900), 0x080),
    t(0x0901, Some(0x094D), 0x401),
    t(0x094E, None, 0x008),
    t(0x094F, Some(0x0950), 0x401),
    t(0x0951, Some(0x0952), 0x008),
    t(0x0953, Some(0x0954), 0x004),
    t(0x0955, None, 0x080),
    t(0x0956, Some(0x0957), 0x401),
    t(0x0958, Some(0x095F), 0x100),
    t(0x0960, Some(0x0963), 0x401),
    t(0x0964, Some(0x0965), 0x200),
    t(0x0966, Some(0x096F), 0x401),
    t(0x0970, None, 0x200),
    t(0x0971, Some(0x0977), 0x401),
    t(0x0978, None, 0x008),
    t(0x0979, Some(0x097F), 0x401),
    t(0x0980, None, 0x008),
    t(0x0981, Some(0x0983), 0x401),
    t(0x0985, Some(0x098C), 0x401),
    t(0x098F, Some(0x0990), 0x401),
    t(0x0993, Some(0x09A8), 0x401),
    t(0x09AA, Some(0x09B0), 0x401),
    t(0x09B2, None, 0x401),
    t(0x09B6, Some(0x09B9), 0x401),
    t(0x09BC, Some(0x09C4), 0x401),
    t(0x09C7, Some(0x09C8), 0x401),
    t(0x09CB, Some(0x09CE), 0x401),
    t(0x09D7, None, 0x401),
    t(0x09DC, Some(0x09DD), 0x100),
    t(0x09DF, None, 0x100),
    t(0x09E0, Some(0x09E3), 0x401),
    t(0x09E6, Some(0x09F1), 0x401),
    t(0x09F2, Some(0x09FB), 0x200),
    t(0x09FC, None, 0x008),
    t(0x09FD, None, 0x200),
    t(0x09FE, None, 0x401),
    t(0x0A01, Some(0x0A03), 0x401),
    t(0x0A05, Some(0x0A0A), 0x401),
    t(0x0A0F, Some(0x0A10), 0x401),
    t(0x0A13, Some(0x0A28), 0x401),
    t(0x0A2A, Some(0x0A30), 0x401),
    t(0x0A32, None, 0x401),
    t(0x0A33, None, 0x100),
    t(0x0A35, None, 0x401),
    t(0x0A36, None, 0x100),
    t(0x0A38, Some(0x0A39), 0x401),
    t(0x0A3C, None, 0x401),
    t(0x0A3E, Some(0x0A42), 0x401),
    t(0x0A47, Some(0x0A48), 0x401),
    t(0x0A4B, Some(0x0A4D), 0x401),
    t(0x0A51, None, 0x080),
    t(0x0A59, Some(0x0A5B), 0x100),
    t(0x0A5C, None, 0x401),
    t(0x0A5E, None, 0x100),
    t(0x0A66, Some(0x0A74), 0x401),
    t(0x0A75, None, 0x080),
    t(0x0A76, None, 0x200),
    t(0x0A81, Some(0x0A83), 0x401),
    t(0x0A85, Some(0x0A8D), 0x401),
    t(0x0A8F, Some(0x0A91), 0x401),
    t(0x0A93, Some(0x0AA8), 0x401),
    t(0x0AAA, Some(0x0AB0), 0x401),
    t(0x0AB2, Some(0x0AB3), 0x401),
    t(0x0AB5, Some(0x0AB9), 0x401),
    t(0x0ABC, Some(0x0AC5), 0x401),
    t(0x0AC7, Some(0x0AC9), 0x401),
    t(0x0ACB, Some(0x0ACD), 0x401),
    t(0x0AD0, None, 0x401),
    t(0x0AE0, Some(0x0AE3), 0x401),
    t(0x0AE6, Some(0x0AEF), 0x401),
    t(0x0AF0, Some(0x0AF1), 0x200),
    t(0x0AF9, None, 0x080),
    t(0x0AFA, Some(0x0AFF), 0x401),
    t(0x0B01, Some(0x0B03), 0x401),
    t(0x0B05, Some(0x0B0C), 0x401),
    t(0x0B0F, Some(0x0B10), 0x401),
    t(0x0B13, Some(0x0B28), 0x401),
    t(0x0B2A, Some(0x0B30), 0x401),
    t(0x0B32, Some(0x0B33), 0x401),
    t(0x0B35, Some(0x0B39), 0x401),
    t(0x0B3C, Some(0x0B43), 0x401),
    t(0x0B44, None, 0x080),
    t(0x0B47, Some(0x0B48), 0x401),
    t(0x0B4B, Some(0x0B4D), 0x401),
    t(0x0B55, Some(0x0B57), 0x401),
    t(0x0B5C, Some(0x0B5D), 0x100),
    t(0x0B5F, Some(0x0B61), 0x401),
    t(0x0B62, Some(0x0B63), 0x080),
    t(0x0B66, Some(0x0B6F), 0x401),
    t(0x0B70, None, 0x200),
    t(0x0B71, None, 0x401),
    t(0x0B72, Some(0x0B77), 0x200),
    t(0x0B82, Some(0x0B83), 0x401),
    t(0x0B85, Some(0x0B8A), 0x401),
    t(0x0B8E, Some(0x0B90), 0x401),
    t(0x0B92, Some(0x0B95), 0x401),
    t(0x0B99, Some(0x0B9A), 0x401),
    t(0x0B9C, None, 0x401),
    t(0x0B9E, Some(0x0B9F), 0x401),
    t(0x0BA3, Some(0x0BA4), 0x401),
    t(0x0BA8, Some(0x0BAA), 0x401),
    t(0x0BAE, Some(0x0BB9), 0x401),
    t(0x0BBE, Some(0x0BC2), 0x401),
    t(0x0BC6, Some(0x0BC8), 0x401),
    t(0x0BCA, Some(0x0BCD), 0x401),
    t(0x0BD0, None, 0x401),
    t(0x0BD7, None, 0x401),
    t(0x0BE6, Some(0x0BEF), 0x401),
    t(0x0BF0, Some(0x0BFA), 0x200),
    t(0x0C00, None, 0x008),
    t(0x0C01, Some(0x0C0C), 0x401),
    t(0x0C0E, Some(0x0C10), 0x401),
    t(0x0C12, Some(0x0C28), 0x401),
    t(0x0C2A, Some(0x0C33), 0x401),
    t(0x0C34, None, 0x008),
    t(0x0C35, Some(0x0C39), 0x401),
    t(0x0C3C, Some(0x0C44), 0x401),
    t(0x0C46, Some(0x0C48), 0x401),
    t(0x0C4A, Some(0x0C4D), 0x401),
    t(0x0C55, Some(0x0C56), 0x401),
    t(0x0C58, Some(0x0C59), 0x008),
    t(0x0C5A, None, 0x080),
    t(0x0C5D, None, 0x401),
    t(0x0C60, Some(0x0C61), 0x401),
    t(0x0C62, Some(0x0C63), 0x080),
    t(0x0C66, Some(0x0C6F), 0x401),
    t(0x0C77, Some(0x0C7F), 0x200),
    t(0x0C80, None, 0x401),
    t(0x0C81, None, 0x008),
    t(0x0C82, Some(0x0C83), 0x401),
    t(0x0C84, None, 0x200),
    t(0x0C85, Some(0x0C8C), 0x401),
    t(0x0C8E, Some(0x0C90), 0x401),
    t(0x0C92, Some(0x0CA8), 0x401),
    t(0x0CAA, Some(0x0CB3), 0x401),
    t(0x0CB5, Some(0x0CB9), 0x401),
    t(0x0CBC, Some(0x0CC4), 0x401),
    t(0x0CC6, Some(0x0CC8), 0x401),
    t(0x0CCA, Some(0x0CCD), 0x401),
    t(0x0CD5, Some(0x0CD6), 0x401),
    t(0x0CDD, None, 0x401),
    t(0x0CDE, None, 0x008),
    t(0x0CE0, Some(0x0CE3), 0x401),
    t(0x0CE6, Some(0x0CEF), 0x401),
    t(0x0CF1, Some(0x0CF2), 0x401),
    t(0x0D00, None, 0x401),
    t(0x0D01, None, 0x008),
    t(0x0D02, Some(0x0D03), 0x401),
    t(0x0D04, None, 0x00C),
    t(0x0D05, Some(0x0D0C), 0x401),
    t(0x0D0E, Some(0x0D10), 0x401),
    t(0x0D12, Some(0x0D3A), 0x401),
    t(0x0D3B, Some(0x0D3C), 0x008),
    t(0x0D3D, Some(0x0D43), 0x401),
    t(0x0D44, None, 0x080),
    t(0x0D46, Some(0x0D48), 0x401),
    t(0x0D4A, Some(0x0D4E), 0x401),
    t(0x0D4F, None, 0x200),
    t(0x0D54, Some(0x0D57), 0x401),
    t(0x0D58, Some(0x0D5E), 0x200),
    t(0x0D5F, None, 0x008),
    t(0x0D60, Some(0x0D61), 0x401),
    t(0x0D62, Some(0x0D63), 0x080),
    t(0x0D66, Some(0x0D6F), 0x401),
    t(0x0D70, Some(0x0D79), 0x200),
    t(0x0D7A, Some(0x0D7F), 0x401),
    t(0x0D81, None, 0x004),
    t(0x0D82, Some(0x0D83), 0x401),
    t(0x0D85, Some(0x0D8E), 0x401),
    t(0x0D8F, Some(0x0D90), 0x084),
    t(0x0D91, Some(0x0D96), 0x401),
    t(0x0D9A, Some(0x0DA5), 0x401),
    t(0x0DA6, None, 0x084),
    t(0x0DA7, Some(0x0DB1), 0x401),
    t(0x0DB3, Some(0x0DBB), 0x401),
    t(0x0DBD, None, 0x401),
    t(0x0DC0, Some(0x0DC6), 0x401),
    t(0x0DCA, None, 0x401),
    t(0x0DCF, Some(0x0DD4), 0x401),
    t(0x0DD6, None, 0x401),
    t(0x0DD8, Some(0x0DDE), 0x401),
    t(0x0DDF, None, 0x084),
    t(0x0DE6, Some(0x0DEF), 0x008),
    t(0x0DF2, None, 0x401),
    t(0x0DF3, None, 0x084),
    t(0x0DF4, None, 0x200),
    t(0x0E01, Some(0x0E32), 0x401),
    t(0x0E33, None, 0x100),
    t(0x0E34, Some(0x0E3A), 0x401),
    t(0x0E3F, None, 0x200),
    t(0x0E40, Some(0x0E4E), 0x401),
    t(0x0E4F, None, 0x200),
    t(0x0E50, Some(0x0E59), 0x401),
    t(0x0E5A, Some(0x0E5B), 0x200),
    t(0x0E81, Some(0x0E82), 0x401),
    t(0x0E84, None, 0x401),
    t(0x0E86, Some(0x0E8A), 0x401),
    t(0x0E8C, Some(0x0EA3), 0x401),
    t(0x0EA5, None, 0x401),
    t(0x0EA7, Some(0x0EB2), 0x401),
    t(0x0EB3, None, 0x100),
    t(0x0EB4, Some(0x0EBD), 0x401),
    t(0x0EC0, Some(0x0EC4), 0x401),
    t(0x0EC6, None, 0x401),
    t(0x0EC8, Some(0x0ECD), 0x401),
    t(0x0ED0, Some(0x0ED9), 0x401),
    t(0x0EDC, Some(0x0EDD), 0x100),
    t(0x0EDE, Some(0x0EDF), 0x401),
    t(0x0F00, None, 0x401),
    t(0x0F01, Some(0x0F0A), 0x200),
    t(0x0F0B, None, 0x011),
    t(0x0F0C, None, 0x100),
    t(0x0F0D, Some(0x0F17), 0x200),
    t(0x0F18, Some(0x0F19), 0x004),
    t(0x0F1A, Some(0x0F1F), 0x200),
    t(0x0F20, Some(0x0F29), 0x401),
    t(0x0F2A, Some(0x0F34), 0x200),
    t(0x0F35, None, 0x401),
    t(0x0F36, None, 0x200),
    t(0x0F37, None, 0x401),
    t(0x0F38, None, 0x200),
    t(0x0F39, None, 0x080),
    t(0x0F3A, Some(0x0F3D), 0x200),
    t(0x0F3E, Some(0x0F42), 0x401),
    t(0x0F43, None, 0x100),
    t(0x0F44, Some(0x0F47), 0x401),
    t(0x0F49, Some(0x0F4C), 0x401),
    t(0x0F4D, None, 0x100),
    t(0x0F4E, Some(0x0F51), 0x401),
    t(0x0F52, None, 0x100),
    t(0x0F53, Some(0x0F56), 0x401),
    t(0x0F57, None, 0x100),
    t(0x0F58, Some(0x0F5B), 0x401),
    t(0x0F5C, None, 0x100),
    t(0x0F5D, Some(0x0F68), 0x401),
    t(0x0F69, None, 0x100),
    t(0x0F6A, Some(0x0F6C), 0x401),
    t(0x0F71, Some(0x0F72), 0x401),
    t(0x0F73, None, 0x100),
    t(0x0F74, None, 0x401),
    t(0x0F75, Some(0x0F76), 0x100),
    t(0x0F77, None, 0x002),
    t(0x0F78, None, 0x100),
    t(0x0F79, None, 0x002),
    t(0x0F7A, Some(0x0F80), 0x401),
    t(0x0F81, None, 0x100),
    t(0x0F82, Some(0x0F84), 0x401),
    t(0x0F85, None, 0x200),
    t(0x0F86, Some(0x0F92), 0x401),
    t(0x0F93, None, 0x100),
    t(0x0F94, Some(0x0F97), 0x401),
    t(0x0F99, Some(0x0F9C), 0x401),
    t(0x0F9D, None, 0x100),
    t(0x0F9E, Some(0x0FA1), 0x401),
    t(0x0FA2, None, 0x100),
    t(0x0FA3, Some(0x0FA6), 0x401),
    t(0x0FA7, None, 0x100),
    t(0x0FA8, Some(0x0FAB), 0x401),
    t(0x0FAC, None, 0x100),
    t(0x0FAD, Some(0x0FB8), 0x401),
    t(0x0FB9, None, 0x100),
    t(0x0FBA, Some(0x0FBC), 0x401),
    t(0x0FBE, Some(0x0FC5), 0x200),
    t(0x0FC6, None, 0x401),
    t(0x0FC7, Some(0x0FCC), 0x200),
    t(0x0FCE, Some(0x0FDA), 0x200),
    t(0x1000, Some(0x1049), 0x401),
    t(0x104A, Some(0x104F), 0x200),
    t(0x1050, Some(0x109D), 0x401),
    t(0x109E, Some(0x109F), 0x200),
    t(0x10A0, Some(0x10C5), 0x008),
    t(0x10C7, None, 0x401),
    t(0x10CD, None, 0x401),
    t(0x10D0, Some(0x10F0), 0x401),
    t(0x10F1, Some(0x10F6), 0x008),
    t(0x10F7, Some(0x10FA), 0x401),
    t(0x10FB, None, 0x200),
    t(0x10FC, None, 0x100),
    t(0x10FD, Some(0x10FF), 0x401),
    t(0x1100, Some(0x115E), 0x008),
    t(0x115F, Some(0x1160), 0x800),
    t(0x1161, Some(0x11FF), 0x008),
    t(0x1200, Some(0x1248), 0x401),
    t(0x124A, Some(0x124D), 0x401),
    t(0x1250, Some(0x1256), 0x401),
    t(0x1258, None, 0x401),
    t(0x125A, Some(0x125D), 0x401),
    t(0x1260, Some(0x1288), 0x401),
    t(0x128A, Some(0x128D), 0x401),
    t(0x1290, Some(0x12B0), 0x401),
    t(0x12B2, Some(0x12B5), 0x401),
    t(0x12B8, Some(0x12BE), 0x401),
    t(0x12C0, None, 0x401),
    t(0x12C2, Some(0x12C5), 0x401),
    t(0x12C8, Some(0x12D6), 0x401),
    t(0x12D8, Some(0x1310), 0x401),
    t(0x1312, Some(0x1315), 0x401),
    t(0x1318, Some(0x135A), 0x401),
    t(0x135D, Some(0x135F), 0x401),
    t(0x1360, Some(0x1368), 0x200),
    t(0x1369, Some(0x1371), 0x008),
    t(0x1372, Some(0x137C), 0x200),
    t(0x1380, Some(0x138F), 0x401),
    t(0x1390, Some(0x1399), 0x200),
    t(0x13A0, Some(0x13F5), 0x040),
    t(0x13F8, Some(0x13FD), 0x040),
    t(0x1400, None, 0x240),
    t(0x1401, Some(0x166C), 0x040),
    t(0x166D, Some(0x166E), 0x240),
    t(0x166F, Some(0x167F), 0x040),
    t(0x1680, None, 0x220),
    t(0x1681, Some(0x169A), 0x020),
    t(0x169B, Some(0x169C), 0x220),
    t(0x16A0, Some(0x16EA), 0x020),
    t(0x16EB, Some(0x16ED), 0x200),
    t(0x16EE, Some(0x16F8), 0x020),
    t(0x1700, Some(0x1715), 0x020),
    t(0x171F, Some(0x1734), 0x020),
    t(0x1735, Some(0x1736), 0x220),
    t(0x1740, Some(0x1753), 0x020),
    t(0x1760, Some(0x176C), 0x020),
    t(0x176E, Some(0x1770), 0x020),
    t(0x1772, Some(0x1773), 0x020),
    t(0x1780, Some(0x17A2), 0x401),
    t(0x17A3, Some(0x17A4), 0x002),
    t(0x17A5, Some(0x17A7), 0x401),
    t(0x17A8, None, 0x008),
    t(0x17A9, Some(0x17B3), 0x401),
    t(0x17B4, Some(0x17B5), 0x800),
    t(0x17B6, Some(0x17CD), 0x401),
    t(0x17CE, Some(0x17CF), 0x004),
    t(0x17D0, None, 0x401),
    t(0x17D1, None, 0x00C),
    t(0x17D2, None, 0x401),
    t(0x17D3, None, 0x008),
    t(0x17D4, Some(0x17D6), 0x200),
    t(0x17D7, None, 0x401),
    t(0x17D8, None, 0x208),
    t(0x17D9, Some(0x17DB), 0x200),
    t(0x17DC, None, 0x401),
    t(0x17DD, None, 0x00C),
    t(0x17E0, Some(0x17E9), 0x401),
    t(0x17F0, Some(0x17F9), 0x200),
    t(0x1800, Some(0x180A), 0x220),
    t(0x180B, Some(0x180F), 0x800),
    t(0x1810, Some(0x1819), 0x020),
    t(0x1820, Some(0x1878), 0x020),
    t(0x1880, Some(0x18A8), 0x020),
    t(0x18A9, None, 0x0A0),
    t(0x18AA, None, 0x020),
    t(0x18B0, Some(0x18F5), 0x040),
    t(0x1900, Some(0x191E), 0x040),
    t(0x1920, Some(0x192B), 0x040),
    t(0x1930, Some(0x193B), 0x040),
    t(0x1940, None, 0x240),
    t(0x1944, Some(0x1945), 0x240),
    t(0x1946, Some(0x196D), 0x040),
    t(0x1970, Some(0x1974), 0x040),
    t(0x1980, Some(0x19AB), 0x040),
    t(0x19B0, Some(0x19C9), 0x040),
    t(0x19D0, Some(0x19DA), 0x040),
    t(0x19DE, Some(0x19DF), 0x240),
    t(0x19E0, Some(0x19FF), 0x200),
    t(0x1A00, Some(0x1A1B), 0x020),
    t(0x1A1E, Some(0x1A1F), 0x220),
    t(0x1A20, Some(0x1A5E), 0x040),
    t(0x1A60, Some(0x1A7C), 0x040),
    t(0x1A7F, Some(0x1A89), 0x040),
    t(0x1A90, Some(0x1A99), 0x040),
    t(0x1AA0, Some(0x1AA6), 0x240),
    t(0x1AA7, None, 0x040),
    t(0x1AA8, Some(0x1AAD), 0x240),
    t(0x1AB0, Some(0x1ABD), 0x008),
    t(0x1ABE, None, 0x200),
    t(0x1ABF, Some(0x1AC0), 0x004),
    t(0x1AC1, Some(0x1ACE), 0x080),
    t(0x1B00, Some(0x1B4C), 0x040),
    t(0x1B50, Some(0x1B59), 0x040),
    t(0x1B5A, Some(0x1B6A), 0x240),
    t(0x1B6B, Some(0x1B73), 0x044),
    t(0x1B74, Some(0x1B7E), 0x240),
    t(0x1B80, Some(0x1BF3), 0x040),
    t(0x1BFC, Some(0x1BFF), 0x240),
    t(0x1C00, Some(0x1C37), 0x040),
    t(0x1C3B, Some(0x1C3F), 0x240),
    t(0x1C40, Some(0x1C49), 0x040),
    t(0x1C4D, Some(0x1C7D), 0x040),
    t(0x1C7E, Some(0x1C7F), 0x240),
    t(0x1C80, Some(0x1C88), 0x008),
    t(0x1C90, Some(0x1CBA), 0x401),
    t(0x1CBD, Some(0x1CBF), 0x401),
    t(0x1CC0, Some(0x1CC7), 0x240),
    t(0x1CD0, Some(0x1CD2), 0x008),
    t(0x1CD3, None, 0x208),
    t(0x1CD4, Some(0x1CF9), 0x008),
    t(0x1CFA, None, 0x020),
    t(0x1D00, Some(0x1D2B), 0x004),
    t(0x1D2C, Some(0x1D2E), 0x100),
    t(0x1D2F, None, 0x004),
    t(0x1D30, Some(0x1D3A), 0x100),
    t(0x1D3B, None, 0x004),
    t(0x1D3C, Some(0x1D4D), 0x100),
    t(0x1D4E, None, 0x004),
    t(0x1D4F, Some(0x1D6A), 0x100),
    t(0x1D6B, Some(0x1D77), 0x004),
    t(0x1D78, None, 0x100),
    t(0x1D79, Some(0x1D9A), 0x004),
    t(0x1D9B, Some(0x1DBF), 0x100),
    t(0x1DC0, Some(0x1DC3), 0x00C),
    t(0x1DC4, Some(0x1DCD), 0x004),
    t(0x1DCE, None, 0x00C),
    t(0x1DCF, Some(0x1DD0), 0x004),
    t(0x1DD1, Some(0x1DE6), 0x00C),
    t(0x1DE7, Some(0x1DF9), 0x004),
    t(0x1DFA, None, 0x044),
    t(0x1DFB, Some(0x1DFF), 0x004),
    t(0x1E00, Some(0x1E99), 0x401),
    t(0x1E9A, Some(0x1E9B), 0x100),
    t(0x1E9C, Some(0x1E9D), 0x004),
    t(0x1E9E, None, 0x401),
    t(0x1E9F, None, 0x004),
    t(0x1EA0, Some(0x1EF9), 0x401),
    t(0x1EFA, Some(0x1EFF), 0x004),
    t(0x1F00, Some(0x1F15), 0x401),
    t(0x1F18, Some(0x1F1D), 0x401),
    t(0x1F20, Some(0x1F45), 0x401),
    t(0x1F48, Some(0x1F4D), 0x401),
    t(0x1F50, Some(0x1F57), 0x401),
    t(0x1F59, None, 0x401),
    t(0x1F5B, None, 0x401),
    t(0x1F5D, None, 0x401),
    t(0x1F5F, Some(0x1F70), 0x401),
    t(0x1F71, None, 0x100),
    t(0x1F72, None, 0x401),
    t(0x1F73, None, 0x100),
    t(0x1F74, None, 0x401),
    t(0x1F75, None, 0x100),
    t(0x1F76, None, 0x401),
    t(0x1F77, None, 0x100),
    t(0x1F78, None, 0x401),
    t(0x1F79, None, 0x100),
    t(0x1F7A, None, 0x401),
    t(0x1F7B, None, 0x100),
    t(0x1F7C, None, 0x401),
    t(0x1F7D, None, 0x100),
    t(0x1F80, Some(0x1FB4), 0x401),
    t(0x1FB6, Some(0x1FBA), 0x401),
    t(0x1FBB, None, 0x100),
    t(0x1FBC, None, 0x401),
    t(0x1FBD, Some(0x1FC1), 0x100),
    t(0x1FC2, Some(0x1FC4), 0x401),
    t(0x1FC6, Some(0x1FC8), 0x401),
    t(0x1FC9, None, 0x100),
    t(0x1FCA, None, 0x401),
    t(0x1FCB, None, 0x100),
    t(0x1FCC, None, 0x401),
    t(0x1FCD, Some(0x1FCF), 0x100),
    t(0x1FD0, Some(0x1FD2), 0x401),
    t(0x1FD3, None, 0x100),
    t(0x1FD6, Some(0x1FDA), 0x401),
    t(0x1FDB, None, 0x100),
    t(0x1FDD, Some(0x1FDF), 0x100),
    t(0x1FE0, Some(0x1FE2), 0x401),
    t(0x1FE3, None, 0x100),
    t(0x1FE4, Some(0x1FEA), 0x401),
    t(0x1FEB, None, 0x100),
    t(0x1FEC, None, 0x401),
    t(0x1FED, Some(0x1FEF), 0x100),
    t(0x1FF2, Some(0x1FF4), 0x401),
    t(0x1FF6, Some(0x1FF8), 0x401),
    t(0x1FF9, None, 0x100),
    t(0x1FFA, None, 0x401),
    t(0x1FFB, None, 0x100),
    t(0x1FFC, None, 0x401),
    t(0x1FFD, Some(0x1FFE), 0x100),
    t(0x2000, Some(0x200A), 0x100),
    t(0x200B, None, 0x800),
    t(0x200C, Some(0x200D), 0x011),
    t(0x200E, Some(0x200F), 0x800),
    t(0x2010, None, 0x011),
    t(0x2011, None, 0x100),
    t(0x2012, Some(0x2016), 0x200),
    t(0x2017, None, 0x100),
    t(0x2018, None, 0x200),
    t(0x2019, None, 0x011),
    t(0x201A, Some(0x2023), 0x200),
    t(0x2024, Some(0x2026), 0x100),
    t(0x2027, None, 0x011),
    t(0x2028, Some(0x2029), 0x200),
    t(0x202A, Some(0x202E), 0x800),
    t(0x202F, None, 0x100),
    t(0x2030, Some(0x2032), 0x200),
    t(0x2033, Some(0x2034), 0x100),
    t(0x2035, None, 0x200),
    t(0x2036, Some(0x2037), 0x100),
    t(0x2038, Some(0x203B), 0x200),
    t(0x203C, None, 0x100),
    t(0x203D, None, 0x200),
    t(0x203E, None, 0x100),
    t(0x203F, Some(0x2040), 0x004),
    t(0x2041, Some(0x2046), 0x200),
    t(0x2047, Some(0x2049), 0x100),
    t(0x204A, Some(0x2053), 0x200),
    t(0x2054, None, 0x080),
    t(0x2055, None, 0x200),
    t(0x2056, None, 0x208),
    t(0x2057, None, 0x100),
    t(0x2058, Some(0x205E), 0x208),
    t(0x205F, None, 0x100),
    t(0x2060, Some(0x2064), 0x800),
    t(0x2066, Some(0x2069), 0x800),
    t(0x206A, Some(0x206F), 0x002),
    t(0x2070, Some(0x2071), 0x100),
    t(0x2074, Some(0x208E), 0x100),
    t(0x2090, Some(0x209C), 0x100),
    t(0x20A0, Some(0x20A7), 0x200),
    t(0x20A8, None, 0x100),
    t(0x20A9, Some(0x20C0), 0x200),
    t(0x20D0, Some(0x20DC), 0x004),
    t(0x20DD, Some(0x20E0), 0x204),
    t(0x20E1, None, 0x004),
    t(0x20E2, Some(0x20E4), 0x204),
    t(0x20E5, Some(0x20F0), 0x004),
    t(0x2100, Some(0x2103), 0x100),
    t(0x2104, None, 0x200),
    t(0x2105, Some(0x2107), 0x100),
    t(0x2108, None, 0x200),
    t(0x2109, Some(0x2113), 0x100),
    t(0x2114, None, 0x200),
    t(0x2115, Some(0x2116), 0x100),
    t(0x2117, None, 0x200),
    t(0x2118, None, 0x004),
    t(0x2119, Some(0x211D), 0x100),
    t(0x211E, Some(0x211F), 0x200),
    t(0x2120, Some(0x2122), 0x100),
    t(0x2123, None, 0x200),
    t(0x2124, None, 0x100),
    t(0x2125, None, 0x200),
    t(0x2126, None, 0x100),
    t(0x2127, None, 0x208),
    t(0x2128, None, 0x100),
    t(0x2129, None, 0x200),
    t(0x212A, Some(0x212D), 0x100),
    t(0x212E, None, 0x004),
    t(0x212F, Some(0x2131), 0x100),
    t(0x2132, None, 0x008),
    t(0x2133, Some(0x2139), 0x100),
    t(0x213A, None, 0x200),
    t(0x213B, Some(0x2140), 0x100),
    t(0x2141, Some(0x2144), 0x200),
    t(0x2145, Some(0x2149), 0x100),
    t(0x214A, Some(0x214D), 0x200),
    t(0x214E, None, 0x008),
    t(0x214F, None, 0x208),
    t(0x2150, Some(0x217F), 0x100),
    t(0x2180, Some(0x2183), 0x00C),
    t(0x2184, Some(0x2188), 0x008),
    t(0x2189, None, 0x100),
    t(0x218A, Some(0x218B), 0x280),
    t(0x2190, Some(0x222B), 0x200),
    t(0x222C, Some(0x222D), 0x100),
    t(0x222E, None, 0x200),
    t(0x222F, Some(0x2230), 0x100),
    t(0x2231, Some(0x2328), 0x200),
    t(0x2329, Some(0x232A), 0x002),
    t(0x232B, Some(0x2426), 0x200),
    t(0x2440, Some(0x244A), 0x200),
    t(0x2460, Some(0x24EA), 0x100),
    t(0x24EB, Some(0x24FF), 0x204),
    t(0x2500, Some(0x27FF), 0x200),
    t(0x2800, Some(0x28FF), 0x204),
    t(0x2900, Some(0x2A0B), 0x200),
    t(0x2A0C, None, 0x100),
    t(0x2A0D, Some(0x2A73), 0x200),
    t(0x2A74, Some(0x2A76), 0x100),
    t(0x2A77, Some(0x2ADB), 0x200),
    t(0x2ADC, None, 0x100),
    t(0x2ADD, Some(0x2B73), 0x200),
    t(0x2B76, Some(0x2B95), 0x200),
    t(0x2B97, Some(0x2BEB), 0x200),
    t(0x2BEC, Some(0x2BEF), 0x280),
    t(0x2BF0, Some(0x2BFF), 0x200),
    t(0x2C00, Some(0x2C5F), 0x020),
    t(0x2C60, Some(0x2C67), 0x004),
    t(0x2C68, Some(0x2C6C), 0x080),
    t(0x2C6D, Some(0x2C76), 0x008),
    t(0x2C77, Some(0x2C7B), 0x004),
    t(0x2C7C, Some(0x2C7D), 0x100),
    t(0x2C7E, Some(0x2C7F), 0x008),
    t(0x2C80, Some(0x2CE4), 0x020),
    t(0x2CE5, Some(0x2CEA), 0x220),
    t(0x2CEB, Some(0x2CEF), 0x020),
    t(0x2CF0, Some(0x2CF1), 0x024),
    t(0x2CF2, Some(0x2CF3), 0x020),
    t(0x2CF9, Some(0x2CFF), 0x220),
    t(0x2D00, Some(0x2D25), 0x008),
    t(0x2D27, None, 0x401),
    t(0x2D2D, None, 0x401),
    t(0x2D30, Some(0x2D67), 0x040),
    t(0x2D6F, None, 0x100),
    t(0x2D70, None, 0x240),
    t(0x2D7F, None, 0x040),
    t(0x2D80, Some(0x2D96), 0x401),
    t(0x2DA0, Some(0x2DA6), 0x401),
    t(0x2DA8, Some(0x2DAE), 0x401),
    t(0x2DB0, Some(0x2DB6), 0x401),
    t(0x2DB8, Some(0x2DBE), 0x401),
    t(0x2DC0, Some(0x2DC6), 0x401),
    t(0x2DC8, Some(0x2DCE), 0x401),
    t(0x2DD0, Some(0x2DD6), 0x401),
    t(0x2DD8, Some(0x2DDE), 0x401),
    t(0x2DE0, Some(0x2DFF), 0x008),
    t(0x2E00, Some(0x2E0D), 0x20C),
    t(0x2E0E, Some(0x2E16), 0x208),
    t(0x2E17, Some(0x2E29), 0x200),
    t(0x2E2A, Some(0x2E32), 0x208),
    t(0x2E33, Some(0x2E34), 0x200),
    t(0x2E35, None, 0x208),
    t(0x2E36, Some(0x2E38), 0x200),
    t(0x2E39, None, 0x208),
    t(0x2E3A, Some(0x2E5D), 0x200),
    t(0x2E80, Some(0x2E99), 0x200),
    t(0x2E9B, Some(0x2E9E), 0x200),
    t(0x2E9F, None, 0x100),
    t(0x2EA0, Some(0x2EF2), 0x200),
    t(0x2EF3, None, 0x100),
    t(0x2F00, Some(0x2FD5), 0x100),
    t(0x2FF0, Some(0x2FFB), 0x200),
    t(0x3000, None, 0x100),
    t(0x3001, Some(0x3004), 0x200),
    t(0x3005, Some(0x3007), 0x401),
    t(0x3008, Some(0x301D), 0x200),
    t(0x301E, None, 0x208),
    t(0x301F, Some(0x3020), 0x200),
    t(0x3021, Some(0x302D), 0x004),
    t(0x302E, Some(0x302F), 0x00C),
    t(0x3030, None, 0x200),
    t(0x3031, Some(0x3035), 0x004),
    t(0x3036, None, 0x100),
    t(0x3037, None, 0x200),
    t(0x3038, Some(0x303A), 0x100),
    t(0x303B, Some(0x303C), 0x004),
    t(0x303D, Some(0x303F), 0x200),
    t(0x3041, Some(0x3096), 0x401),
    t(0x3099, Some(0x309A), 0x401),
    t(0x309B, Some(0x309C), 0x100),
    t(0x309D, Some(0x309E), 0x401),
    t(0x309F, None, 0x100),
    t(0x30A0, None, 0x011),
    t(0x30A1, Some(0x30FA), 0x401),
    t(0x30FB, None, 0x011),
    t(0x30FC, Some(0x30FE), 0x401),
    t(0x30FF, None, 0x100),
    t(0x3105, Some(0x312D), 0x401),
    t(0x312E, None, 0x008),
    t(0x312F, None, 0x401),
    t(0x3131, Some(0x3163), 0x100),
    t(0x3164, None, 0x800),
    t(0x3165, Some(0x318E), 0x100),
    t(0x3190, Some(0x3191), 0x200),
    t(0x3192, Some(0x319F), 0x100),
    t(0x31A0, Some(0x31BF), 0x401),
    t(0x31C0, Some(0x31E3), 0x200),
    t(0x31F0, Some(0x31FF), 0x008),
    t(0x3200, Some(0x321E), 0x100),
    t(0x3220, Some(0x3247), 0x100),
    t(0x3248, Some(0x324F), 0x200),
    t(0x3250, Some(0x327E), 0x100),
    t(0x327F, None, 0x204),
    t(0x3280, Some(0x33FF), 0x100),
    t(0x3400, Some(0x4DBF), 0x401),
    t(0x4DC0, Some(0x4DFF), 0x204),
    t(0x4E00, Some(0x9FFF), 0x401),
    t(0xA000, Some(0xA48C), 0x040),
    t(0xA490, Some(0xA4C6), 0x240),
    t(0xA4D0, Some(0xA4FD), 0x040),
    t(0xA4FE, Some(0xA4FF), 0x240),
    t(0xA500, Some(0xA60C), 0x040),
    t(0xA60D, Some(0xA60F), 0x240),
    t(0xA610, Some(0xA612), 0x048),
    t(0xA613, Some(0xA629), 0x040),
    t(0xA62A, Some(0xA62B), 0x048),
    t(0xA640, Some(0xA66E), 0x008),
    t(0xA66F, None, 0x080),
    t(0xA670, Some(0xA673), 0x208),
    t(0xA674, Some(0xA67B), 0x008),
    t(0xA67C, Some(0xA67D), 0x080),
    t(0xA67E, None, 0x200),
    t(0xA67F, None, 0x401),
    t(0xA680, Some(0xA69B), 0x008),
    t(0xA69C, Some(0xA69D), 0x100),
    t(0xA69E, None, 0x088),
    t(0xA69F, None, 0x008),
    t(0xA6A0, Some(0xA6F1), 0x040),
    t(0xA6F2, Some(0xA6F7), 0x240),
    t(0xA700, Some(0xA707), 0x208),
    t(0xA708, Some(0xA716), 0x204),
    t(0xA717, Some(0xA71F), 0x401),
    t(0xA720, Some(0xA721), 0x200),
    t(0xA722, Some(0xA72F), 0x00C),
    t(0xA730, Some(0xA76F), 0x008),
    t(0xA770, None, 0x100),
    t(0xA771, Some(0xA787), 0x008),
    t(0xA788, None, 0x401),
    t(0xA789, Some(0xA78A), 0x200),
    t(0xA78B, Some(0xA78C), 0x080),
    t(0xA78D, None, 0x401),
    t(0xA78E, None, 0x004),
    t(0xA78F, None, 0x080),
    t(0xA790, Some(0xA791), 0x008),
    t(0xA792, Some(0xA793), 0x401),
    t(0xA794, Some(0xA7A9), 0x008),
    t(0xA7AA, None, 0x401),
    t(0xA7AB, Some(0xA7AD), 0x008),
    t(0xA7AE, None, 0x401),
    t(0xA7AF, None, 0x004),
    t(0xA7B0, Some(0xA7B1), 0x008),
    t(0xA7B2, Some(0xA7B7), 0x080),
    t(0xA7B8, Some(0xA7B9), 0x401),
    t(0xA7BA, Some(0xA7BF), 0x004),
    t(0xA7C0, Some(0xA7CA), 0x401),
    t(0xA7D0, Some(0xA7D1), 0x401),
    t(0xA7D3, None, 0x401),
    t(0xA7D5, Some(0xA7D9), 0x401),
    t(0xA7F2, Some(0xA7F4), 0x100),
    t(0xA7F5, Some(0xA7F7), 0x008),
    t(0xA7F8, Some(0xA7F9), 0x100),
    t(0xA7FA, None, 0x004),
    t(0xA7FB, Some(0xA7FF), 0x008),
    t(0xA800, Some(0xA827), 0x040),
    t(0xA828, Some(0xA82B), 0x240),
    t(0xA82C, None, 0x040),
    t(0xA830, Some(0xA839), 0x200),
    t(0xA840, Some(0xA873), 0x020),
    t(0xA874, Some(0xA877), 0x220),
    t(0xA880, Some(0xA8C5), 0x040),
    t(0xA8CE, Some(0xA8CF), 0x240),
    t(0xA8D0, Some(0xA8D9), 0x040),
    t(0xA8E0, Some(0xA8F7), 0x008),
    t(0xA8F8, Some(0xA8FA), 0x208),
    t(0xA8FB, None, 0x008),
    t(0xA8FC, None, 0x288),
    t(0xA8FD, None, 0x088),
    t(0xA8FE, Some(0xA8FF), 0x008),
    t(0xA900, Some(0xA92D), 0x040),
    t(0xA92E, None, 0x200),
    t(0xA92F, None, 0x240),
    t(0xA930, Some(0xA953), 0x020),
    t(0xA95F, None, 0x220),
    t(0xA960, Some(0xA97C), 0x008),
    t(0xA980, Some(0xA9C0), 0x040),
    t(0xA9C1, Some(0xA9CD), 0x240),
    t(0xA9CF, None, 0x060),
    t(0xA9D0, Some(0xA9D9), 0x040),
    t(0xA9DE, Some(0xA9DF), 0x240),
    t(0xA9E0, Some(0xA9E6), 0x008),
    t(0xA9E7, Some(0xA9FE), 0x401),
    t(0xAA00, Some(0xAA36), 0x040),
    t(0xAA40, Some(0xAA4D), 0x040),
    t(0xAA50, Some(0xAA59), 0x040),
    t(0xAA5C, Some(0xAA5F), 0x240),
    t(0xAA60, Some(0xAA76), 0x401),
    t(0xAA77, Some(0xAA79), 0x200),
    t(0xAA7A, Some(0xAA7F), 0x401),
    t(0xAA80, Some(0xAAC2), 0x040),
    t(0xAADB, Some(0xAADD), 0x040),
    t(0xAADE, Some(0xAADF), 0x240),
    t(0xAAE0, Some(0xAAEF), 0x040),
    t(0xAAF0, Some(0xAAF1), 0x240),
    t(0xAAF2, Some(0xAAF6), 0x040),
    t(0xAB01, Some(0xAB06), 0x401),
    t(0xAB09, Some(0xAB0E), 0x401),
    t(0xAB11, Some(0xAB16), 0x401),
    t(0xAB20, Some(0xAB26), 0x401),
    t(0xAB28, Some(0xAB2E), 0x401),
    t(0xAB30, Some(0xAB5A), 0x008),
    t(0xAB5B, None, 0x200),
    t(0xAB5C, Some(0xAB5F), 0x100),
    t(0xAB60, Some(0xAB63), 0x080),
    t(0xAB64, Some(0xAB65), 0x008),
    t(0xAB66, Some(0xAB67), 0x401),
    t(0xAB68, None, 0x004),
    t(0xAB69, None, 0x100),
    t(0xAB6A, Some(0xAB6B), 0x200),
    t(0xAB70, Some(0xABEA), 0x040),
    t(0xABEB, None, 0x240),
    t(0xABEC, Some(0xABED), 0x040),
    t(0xABF0, Some(0xABF9), 0x040),
    t(0xAC00, Some(0xD7A3), 0x401),
    t(0xD7B0, Some(0xD7C6), 0x008),
    t(0xD7CB, Some(0xD7FB), 0x008),
    t(0xF900, Some(0xFA0D), 0x100),
    t(0xFA0E, Some(0xFA0F), 0x401),
    t(0xFA10, None, 0x100),
    t(0xFA11, None, 0x401),
    t(0xFA12, None, 0x100),
    t(0xFA13, Some(0xFA14), 0x401),
    t(0xFA15, Some(0xFA1E), 0x100),
    t(0xFA1F, None, 0x401),
    t(0xFA20, None, 0x100),
    t(0xFA21, None, 0x401),
    t(0xFA22, None, 0x100),
    t(0xFA23, Some(0xFA24), 0x401),
    t(0xFA25, Some(0xFA26), 0x100),
    t(0xFA27, Some(0xFA29), 0x401),
    t(0xFA2A, Some(0xFA6D), 0x100),
    t(0xFA70, Some(0xFAD9), 0x100),
    t(0xFB00, Some(0xFB06), 0x100),
    t(0xFB13, Some(0xFB17), 0x100),
    t(0xFB1D, None, 0x100),
    t(0xFB1E, None, 0x084),
    t(0xFB1F, Some(0xFB36), 0x100),
    t(0xFB38, Some(0xFB3C), 0x100),
    t(0xFB3E, None, 0x100),
    t(0xFB40, Some(0xFB41), 0x100),
    t(0xFB43, Some(0xFB44), 0x100),
    t(0xFB46, Some(0xFBB1), 0x100),
    t(0xFBB2, Some(0xFBC2), 0x204),
    t(0xFBD3, Some(0xFD3D), 0x100),
    t(0xFD3E, Some(0xFD4F), 0x204),
    t(0xFD50, Some(0xFD8F), 0x100),
    t(0xFD92, Some(0xFDC7), 0x100),
    t(0xFDCF, None, 0x204),
    t(0xFDF0, Some(0xFDFC), 0x100),
    t(0xFDFD, Some(0xFDFF), 0x204),
    t(0xFE00, Some(0xFE0F), 0x800),
    t(0xFE10, Some(0xFE19), 0x100),
    t(0xFE20, Some(0xFE2D), 0x004),
    t(0xFE2E, Some(0xFE2F), 0x084),
    t(0xFE30, Some(0xFE44), 0x100),
    t(0xFE45, Some(0xFE46), 0x204),
    t(0xFE47, Some(0xFE52), 0x100),
    t(0xFE54, Some(0xFE66), 0x100),
    t(0xFE68, Some(0xFE6B), 0x100),
    t(0xFE70, Some(0xFE72), 0x100),
    t(0xFE73, None, 0x004),
    t(0xFE74, None, 0x100),
    t(0xFE76, Some(0xFEFC), 0x100),
    t(0xFEFF, None, 0x800),
    t(0xFF01, Some(0xFF9F), 0x100),
    t(0xFFA0, None, 0x800),
    t(0xFFA1, Some(0xFFBE), 0x100),
    t(0xFFC2, Some(0xFFC7), 0x100),
    t(0xFFCA, Some(0xFFCF), 0x100),
    t(0xFFD2, Some(0xFFD7), 0x100),
    t(0xFFDA, Some(0xFFDC), 0x100),
    t(0xFFE0, Some(0xFFE6), 0x100),
    t(0xFFE8, Some(0xFFEE), 0x100),
    t(0xFFF9, Some(0xFFFD), 0x200),
    t(0x10000, Some(0x1000B), 0x020),
    t(0x1000D, Some(0x10026), 0x020),
    t(0x10028, Some(0x1003A), 0x020),
    t(0x1003C, Some(0x1003D), 0x020),
    t(0x1003F, Some(0x1004D), 0x020),
    t(0x10050, Some(0x1005D), 0x020),
    t(0x10080, Some(0x100FA), 0x020),
    t(0x10100, Some(0x10102), 0x220),
    t(0x10107, Some(0x10133), 0x220),
    t(0x10137, Some(0x1013F), 0x220),
    t(0x10140, Some(0x10174), 0x008),
    t(0x10175, Some(0x1018E), 0x200),
    t(0x10190, Some(0x1019C), 0x200),
    t(0x101A0, None, 0x200),
    t(0x101D0, Some(0x101FC), 0x208),
    t(0x101FD, None, 0x008),
    t(0x10280, Some(0x1029C), 0x020),
    t(0x102A0, Some(0x102D0), 0x020),
    t(0x102E0, None, 0x008),
    t(0x102E1, Some(0x102FB), 0x208),
    t(0x10300, Some(0x1031F), 0x020),
    t(0x10320, Some(0x10323), 0x220),
    t(0x1032D, Some(0x1034A), 0x020),
    t(0x10350, Some(0x1037A), 0x020),
    t(0x10380, Some(0x1039D), 0x020),
    t(0x1039F, None, 0x220),
    t(0x103A0, Some(0x103C3), 0x020),
    t(0x103C8, Some(0x103CF), 0x020),
    t(0x103D0, None, 0x220),
    t(0x103D1, Some(0x103D5), 0x020),
    t(0x10400, Some(0x1049D), 0x020),
    t(0x104A0, Some(0x104A9), 0x020),
    t(0x104B0, Some(0x104D3), 0x040),
    t(0x104D8, Some(0x104FB), 0x040),
    t(0x10500, Some(0x10527), 0x020),
    t(0x10530, Some(0x10563), 0x020),
    t(0x1056F, None, 0x220),
    t(0x10570, Some(0x1057A), 0x020),
    t(0x1057C, Some(0x1058A), 0x020),
    t(0x1058C, Some(0x10592), 0x020),
    t(0x10594, Some(0x10595), 0x020),
    t(0x10597, Some(0x105A1), 0x020),
    t(0x105A3, Some(0x105B1), 0x020),
    t(0x105B3, Some(0x105B9), 0x020),
    t(0x105BB, Some(0x105BC), 0x020),
    t(0x10600, Some(0x10736), 0x020),
    t(0x10740, Some(0x10755), 0x020),
    t(0x10760, Some(0x10767), 0x020),
    t(0x10780, None, 0x080),
    t(0x10781, Some(0x10785), 0x100),
    t(0x10787, Some(0x107B0), 0x100),
    t(0x107B2, Some(0x107BA), 0x100),
    t(0x10800, Some(0x10805), 0x020),
    t(0x10808, None, 0x020),
    t(0x1080A, Some(0x10835), 0x020),
    t(0x10837, Some(0x10838), 0x020),
    t(0x1083C, None, 0x020),
    t(0x1083F, Some(0x10855), 0x020),
    t(0x10857, Some(0x1085F), 0x220),
    t(0x10860, Some(0x10876), 0x020),
    t(0x10877, Some(0x1087F), 0x220),
    t(0x10880, Some(0x1089E), 0x020),
    t(0x108A7, Some(0x108AF), 0x220),
    t(0x108E0, Some(0x108F2), 0x020),
    t(0x108F4, Some(0x108F5), 0x020),
    t(0x108FB, Some(0x108FF), 0x220),
    t(0x10900, Some(0x10915), 0x020),
    t(0x10916, Some(0x1091B), 0x220),
    t(0x1091F, None, 0x220),
    t(0x10920, Some(0x10939), 0x020),
    t(0x1093F, None, 0x220),
    t(0x10980, Some(0x109B7), 0x020),
    t(0x109BC, Some(0x109BD), 0x220),
    t(0x109BE, Some(0x109BF), 0x020),
    t(0x109C0, Some(0x109CF), 0x220),
    t(0x109D2, Some(0x109FF), 0x220),
    t(0x10A00, Some(0x10A03), 0x020),
    t(0x10A05, Some(0x10A06), 0x020),
    t(0x10A0C, Some(0x10A13), 0x020),
    t(0x10A15, Some(0x10A17), 0x020),
    t(0x10A19, Some(0x10A35), 0x020),
    t(0x10A38, Some(0x10A3A), 0x020),
    t(0x10A3F, None, 0x020),
    t(0x10A40, Some(0x10A48), 0x220),
    t(0x10A50, Some(0x10A58), 0x220),
    t(0x10A60, Some(0x10A7C), 0x020),
    t(0x10A7D, Some(0x10A7F), 0x220),
    t(0x10A80, Some(0x10A9C), 0x020),
    t(0x10A9D, Some(0x10A9F), 0x220),
    t(0x10AC0, Some(0x10AC7), 0x020),
    t(0x10AC8, None, 0x220),
    t(0x10AC9, Some(0x10AE6), 0x020),
    t(0x10AEB, Some(0x10AF6), 0x220),
    t(0x10B00, Some(0x10B35), 0x020),
    t(0x10B39, Some(0x10B3F), 0x220),
    t(0x10B40, Some(0x10B55), 0x020),
    t(0x10B58, Some(0x10B5F), 0x220),
    t(0x10B60, Some(0x10B72), 0x020),
    t(0x10B78, Some(0x10B7F), 0x220),
    t(0x10B80, Some(0x10B91), 0x020),
    t(0x10B99, Some(0x10B9C), 0x220),
    t(0x10BA9, Some(0x10BAF), 0x220),
    t(0x10C00, Some(0x10C48), 0x020),
    t(0x10C80, Some(0x10CB2), 0x020),
    t(0x10CC0, Some(0x10CF2), 0x020),
    t(0x10CFA, Some(0x10CFF), 0x220),
    t(0x10D00, Some(0x10D27), 0x040),
    t(0x10D30, Some(0x10D39), 0x040),
    t(0x10E60, Some(0x10E7E), 0x200),
    t(0x10E80, Some(0x10EA9), 0x020),
    t(0x10EAB, Some(0x10EAC), 0x020),
    t(0x10EAD, None, 0x220),
    t(0x10EB0, Some(0x10EB1), 0x020),
    t(0x10F00, Some(0x10F1C), 0x020),
    t(0x10F1D, Some(0x10F26), 0x220),
    t(0x10F27, None, 0x020),
    t(0x10F30, Some(0x10F50), 0x020),
    t(0x10F51, Some(0x10F59), 0x220),
    t(0x10F70, Some(0x10F85), 0x020),
    t(0x10F86, Some(0x10F89), 0x220),
    t(0x10FB0, Some(0x10FC4), 0x020),
    t(0x10FC5, Some(0x10FCB), 0x220),
    t(0x10FE0, Some(0x10FF6), 0x020),
    t(0x11000, Some(0x11046), 0x020),
    t(0x11047, Some(0x1104D), 0x220),
    t(0x11052, Some(0x11065), 0x220),
    t(0x11066, Some(0x11075), 0x020),
    t(0x1107F, Some(0x110BA), 0x020),
    t(0x110BB, Some(0x110C1), 0x220),
    t(0x110C2, None, 0x020),
    t(0x110CD, None, 0x220),
    t(0x110D0, Some(0x110E8), 0x020),
    t(0x110F0, Some(0x110F9), 0x020),
    t(0x11100, Some(0x11134), 0x040),
    t(0x11136, Some(0x1113F), 0x040),
    t(0x11140, Some(0x11143), 0x240),
    t(0x11144, Some(0x11147), 0x040),
    t(0x11150, Some(0x11173), 0x020),
    t(0x11174, Some(0x11175), 0x220),
    t(0x11176, None, 0x020),
    t(0x11180, Some(0x111C4), 0x020),
    t(0x111C5, Some(0x111C8), 0x220),
    t(0x111C9, Some(0x111CC), 0x020),
    t(0x111CD, None, 0x220),
    t(0x111CE, Some(0x111DA), 0x020),
    t(0x111DB, None, 0x220),
    t(0x111DC, None, 0x020),
    t(0x111DD, Some(0x111DF), 0x220),
    t(0x111E1, Some(0x111F4), 0x200),
    t(0x11200, Some(0x11211), 0x020),
    t(0x11213, Some(0x11237), 0x020),
    t(0x11238, Some(0x1123D), 0x220),
    t(0x1123E, None, 0x020),
    t(0x11280, Some(0x11286), 0x020),
    t(0x11288, None, 0x020),
    t(0x1128A, Some(0x1128D), 0x020),
    t(0x1128F, Some(0x1129D), 0x020),
    t(0x1129F, Some(0x112A8), 0x020),
    t(0x112A9, None, 0x220),
    t(0x112B0, Some(0x112EA), 0x020),
    t(0x112F0, Some(0x112F9), 0x020),
    t(0x11300, None, 0x020),
    t(0x11301, None, 0x401),
    t(0x11302, None, 0x020),
    t(0x11303, None, 0x401),
    t(0x11305, Some(0x1130C), 0x020),
    t(0x1130F, Some(0x11310), 0x020),
    t(0x11313, Some(0x11328), 0x020),
    t(0x1132A, Some(0x11330), 0x020),
    t(0x11332, Some(0x11333), 0x020),
    t(0x11335, Some(0x11339), 0x020),
    t(0x1133B, Some(0x1133C), 0x401),
    t(0x1133D, Some(0x11344), 0x020),
    t(0x11347, Some(0x11348), 0x020),
    t(0x1134B, Some(0x1134D), 0x020),
    t(0x11350, None, 0x020),
    t(0x11357, None, 0x020),
    t(0x1135D, Some(0x11363), 0x020),
    t(0x11366, Some(0x1136C), 0x020),
    t(0x11370, Some(0x11374), 0x020),
    t(0x11400, Some(0x1144A), 0x040),
    t(0x1144B, Some(0x1144F), 0x240),
    t(0x11450, Some(0x11459), 0x040),
    t(0x1145A, Some(0x1145B), 0x240),
    t(0x1145D, None, 0x240),
    t(0x1145E, Some(0x11461), 0x040),
    t(0x11480, Some(0x114C5), 0x020),
    t(0x114C6, None, 0x220),
    t(0x114C7, None, 0x020),
    t(0x114D0, Some(0x114D9), 0x020),
    t(0x11580, Some(0x115B5), 0x020),
    t(0x115B8, Some(0x115C0), 0x020),
    t(0x115C1, Some(0x115D7), 0x220),
    t(0x115D8, Some(0x115DD), 0x020),
    t(0x11600, Some(0x11640), 0x020),
    t(0x11641, Some(0x11643), 0x220),
    t(0x11644, None, 0x020),
    t(0x11650, Some(0x11659), 0x020),
    t(0x11660, Some(0x1166C), 0x220),
    t(0x11680, Some(0x116B8), 0x020),
    t(0x116B9, None, 0x220),
    t(0x116C0, Some(0x116C9), 0x020),
    t(0x11700, Some(0x1171A), 0x020),
    t(0x1171D, Some(0x1172B), 0x020),
    t(0x11730, Some(0x11739), 0x020),
    t(0x1173A, Some(0x1173F), 0x220),
    t(0x11740, Some(0x11746), 0x020),
    t(0x11800, Some(0x1183A), 0x020),
    t(0x1183B, None, 0x220),
    t(0x118A0, Some(0x118E9), 0x020),
    t(0x118EA, Some(0x118F2), 0x220),
    t(0x118FF, Some(0x11906), 0x020),
    t(0x11909, None, 0x020),
    t(0x1190C, Some(0x11913), 0x020),
    t(0x11915, Some(0x11916), 0x020),
    t(0x11918, Some(0x11935), 0x020),
    t(0x11937, Some(0x11938), 0x020),
    t(0x1193B, Some(0x11943), 0x020),
    t(0x11944, Some(0x11946), 0x220),
    t(0x11950, Some(0x11959), 0x020),
    t(0x119A0, Some(0x119A7), 0x020),
    t(0x119AA, Some(0x119D7), 0x020),
    t(0x119DA, Some(0x119E1), 0x020),
    t(0x119E2, None, 0x220),
    t(0x119E3, Some(0x119E4), 0x020),
    t(0x11A00, Some(0x11A3E), 0x020),
    t(0x11A3F, Some(0x11A46), 0x220),
    t(0x11A47, None, 0x020),
    t(0x11A50, Some(0x11A99), 0x020),
    t(0x11A9A, Some(0x11A9C), 0x220),
    t(0x11A9D, None, 0x020),
    t(0x11A9E, Some(0x11AA2), 0x220),
    t(0x11AB0, Some(0x11ABF), 0x040),
    t(0x11AC0, Some(0x11AF8), 0x020),
    t(0x11C00, Some(0x11C08), 0x020),
    t(0x11C0A, Some(0x11C36), 0x020),
    t(0x11C38, Some(0x11C40), 0x020),
    t(0x11C41, Some(0x11C45), 0x220),
    t(0x11C50, Some(0x11C59), 0x020),
    t(0x11C5A, Some(0x11C6C), 0x220),
    t(0x11C70, Some(0x11C71), 0x220),
    t(0x11C72, Some(0x11C8F), 0x020),
    t(0x11C92, Some(0x11CA7), 0x020),
    t(0x11CA9, Some(0x11CB6), 0x020),
    t(0x11D00, Some(0x11D06), 0x020),
    t(0x11D08, Some(0x11D09), 0x020),
    t(0x11D0B, Some(0x11D36), 0x020),
    t(0x11D3A, None, 0x020),
    t(0x11D3C, Some(0x11D3D), 0x020),
    t(0x11D3F, Some(0x11D47), 0x020),
    t(0x11D50, Some(0x11D59), 0x020),
    t(0x11D60, Some(0x11D65), 0x040),
    t(0x11D67, Some(0x11D68), 0x040),
    t(0x11D6A, Some(0x11D8E), 0x040),
    t(0x11D90, Some(0x11D91), 0x040),
    t(0x11D93, Some(0x11D98), 0x040),
    t(0x11DA0, Some(0x11DA9), 0x040),
    t(0x11EE0, Some(0x11EF6), 0x020),
    t(0x11EF7, Some(0x11EF8), 0x220),
    t(0x11FB0, None, 0x040),
    t(0x11FC0, Some(0x11FF1), 0x200),
    t(0x11FFF, None, 0x200),
    t(0x12000, Some(0x12399), 0x020),
    t(0x12400, Some(0x1246E), 0x020),
    t(0x12470, Some(0x12474), 0x220),
    t(0x12480, Some(0x12543), 0x020),
    t(0x12F90, Some(0x12FF0), 0x020),
    t(0x12FF1, Some(0x12FF2), 0x220),
    t(0x13000, Some(0x1342E), 0x020),
    t(0x13430, Some(0x13438), 0x220),
    t(0x14400, Some(0x14646), 0x020),
    t(0x16800, Some(0x16A38), 0x040),
    t(0x16A40, Some(0x16A5E), 0x0A0),
    t(0x16A60, Some(0x16A69), 0x0A0),
    t(0x16A6E, Some(0x16A6F), 0x220),
    t(0x16A70, Some(0x16ABE), 0x020),
    t(0x16AC0, Some(0x16AC9), 0x020),
    t(0x16AD0, Some(0x16AED), 0x020),
    t(0x16AF0, Some(0x16AF4), 0x020),
    t(0x16AF5, None, 0x220),
    t(0x16B00, Some(0x16B36), 0x020),
    t(0x16B37, Some(0x16B3F), 0x220),
    t(0x16B40, Some(0x16B43), 0x020),
    t(0x16B44, Some(0x16B45), 0x220),
    t(0x16B50, Some(0x16B59), 0x020),
    t(0x16B5B, Some(0x16B61), 0x220),
    t(0x16B63, Some(0x16B77), 0x020),
    t(0x16B7D, Some(0x16B8F), 0x020),
    t(0x16E40, Some(0x16E7F), 0x020),
    t(0x16E80, Some(0x16E9A), 0x220),
    t(0x16F00, Some(0x16F4A), 0x040),
    t(0x16F4F, Some(0x16F87), 0x040),
    t(0x16F8F, Some(0x16F9F), 0x040),
    t(0x16FE0, Some(0x16FE1), 0x020),
    t(0x16FE2, None, 0x200),
    t(0x16FE3, None, 0x008),
    t(0x16FE4, None, 0x020),
    t(0x16FF0, Some(0x16FF1), 0x401),
    t(0x17000, Some(0x187F7), 0x020),
    t(0x18800, Some(0x18CD5), 0x020),
    t(0x18D00, Some(0x18D08), 0x020),
    t(0x1AFF0, Some(0x1AFF3), 0x080),
    t(0x1AFF5, Some(0x1AFFB), 0x080),
    t(0x1AFFD, Some(0x1AFFE), 0x080),
    t(0x1B000, Some(0x1B11E), 0x008),
    t(0x1B11F, Some(0x1B122), 0x401),
    t(0x1B150, Some(0x1B152), 0x401),
    t(0x1B164, Some(0x1B167), 0x401),
    t(0x1B170, Some(0x1B2FB), 0x020),
    t(0x1BC00, Some(0x1BC6A), 0x020),
    t(0x1BC70, Some(0x1BC7C), 0x020),
    t(0x1BC80, Some(0x1BC88), 0x020),
    t(0x1BC90, Some(0x1BC99), 0x020),
    t(0x1BC9C, None, 0x220),
    t(0x1BC9D, Some(0x1BC9E), 0x020),
    t(0x1BC9F, None, 0x220),
    t(0x1BCA0, Some(0x1BCA3), 0x800),
    t(0x1CF00, Some(0x1CF2D), 0x004),
    t(0x1CF30, Some(0x1CF46), 0x004),
    t(0x1CF50, Some(0x1CFC3), 0x204),
    t(0x1D000, Some(0x1D0F5), 0x204),
    t(0x1D100, Some(0x1D126), 0x204),
    t(0x1D129, Some(0x1D15D), 0x204),
    t(0x1D15E, Some(0x1D164), 0x100),
    t(0x1D165, Some(0x1D169), 0x004),
    t(0x1D16A, Some(0x1D16C), 0x204),
    t(0x1D16D, Some(0x1D172), 0x004),
    t(0x1D173, Some(0x1D17A), 0x800),
    t(0x1D17B, Some(0x1D182), 0x004),
    t(0x1D183, Some(0x1D184), 0x204),
    t(0x1D185, Some(0x1D18B), 0x004),
    t(0x1D18C, Some(0x1D1A9), 0x204),
    t(0x1D1AA, Some(0x1D1AD), 0x004),
    t(0x1D1AE, Some(0x1D1BA), 0x204),
    t(0x1D1BB, Some(0x1D1C0), 0x100),
    t(0x1D1C1, Some(0x1D1DD), 0x204),
    t(0x1D1DE, Some(0x1D1E8), 0x284),
    t(0x1D1E9, Some(0x1D1EA), 0x204),
    t(0x1D200, Some(0x1D241), 0x208),
    t(0x1D242, Some(0x1D244), 0x00C),
    t(0x1D245, None, 0x208),
    t(0x1D2E0, Some(0x1D2F3), 0x200),
    t(0x1D300, Some(0x1D356), 0x204),
    t(0x1D360, Some(0x1D378), 0x200),
    t(0x1D400, Some(0x1D454), 0x100),
    t(0x1D456, Some(0x1D49C), 0x100),
    t(0x1D49E, Some(0x1D49F), 0x100),
    t(0x1D4A2, None, 0x100),
    t(0x1D4A5, Some(0x1D4A6), 0x100),
    t(0x1D4A9, Some(0x1D4AC), 0x100),
    t(0x1D4AE, Some(0x1D4B9), 0x100),
    t(0x1D4BB, None, 0x100),
    t(0x1D4BD, Some(0x1D4C3), 0x100),
    t(0x1D4C5, Some(0x1D505), 0x100),
    t(0x1D507, Some(0x1D50A), 0x100),
    t(0x1D50D, Some(0x1D514), 0x100),
    t(0x1D516, Some(0x1D51C), 0x100),
    t(0x1D51E, Some(0x1D539), 0x100),
    t(0x1D53B, Some(0x1D53E), 0x100),
    t(0x1D540, Some(0x1D544), 0x100),
    t(0x1D546, None, 0x100),
    t(0x1D54A, Some(0x1D550), 0x100),
    t(0x1D552, Some(0x1D6A5), 0x100),
    t(0x1D6A8, Some(0x1D7CB), 0x100),
    t(0x1D7CE, Some(0x1D7FF), 0x100),
    t(0x1D800, Some(0x1D9FF), 0x220),
    t(0x1DA00, Some(0x1DA36), 0x020),
    t(0x1DA37, Some(0x1DA3A), 0x220),
    t(0x1DA3B, Some(0x1DA6C), 0x020),
    t(0x1DA6D, Some(0x1DA74), 0x220),
    t(0x1DA75, None, 0x020),
    t(0x1DA76, Some(0x1DA83), 0x220),
    t(0x1DA84, None, 0x020),
    t(0x1DA85, Some(0x1DA8B), 0x220),
    t(0x1DA9B, Some(0x1DA9F), 0x020),
    t(0x1DAA1, Some(0x1DAAF), 0x020),
    t(0x1DF00, Some(0x1DF1E), 0x401),
    t(0x1E000, Some(0x1E006), 0x020),
    t(0x1E008, Some(0x1E018), 0x020),
    t(0x1E01B, Some(0x1E021), 0x020),
    t(0x1E023, Some(0x1E024), 0x020),
    t(0x1E026, Some(0x1E02A), 0x020),
    t(0x1E100, Some(0x1E12C), 0x040),
    t(0x1E130, Some(0x1E13D), 0x040),
    t(0x1E140, Some(0x1E149), 0x040),
    t(0x1E14E, None, 0x040),
    t(0x1E14F, None, 0x240),
    t(0x1E290, Some(0x1E2AE), 0x020),
    t(0x1E2C0, Some(0x1E2F9), 0x040),
    t(0x1E2FF, None, 0x240),
    t(0x1E7E0, Some(0x1E7E6), 0x401),
    t(0x1E7E8, Some(0x1E7EB), 0x401),
    t(0x1E7ED, Some(0x1E7EE), 0x401),
    t(0x1E7F0, Some(0x1E7FE), 0x401),
    t(0x1E800, Some(0x1E8C4), 0x020),
    t(0x1E8C7, Some(0x1E8CF), 0x220),
    t(0x1E8D0, Some(0x1E8D6), 0x020),
    t(0x1E900, Some(0x1E94B), 0x040),
    t(0x1E950, Some(0x1E959), 0x040),
    t(0x1E95E, Some(0x1E95F), 0x240),
    t(0x1EC71, Some(0x1ECB4), 0x200),
    t(0x1ED01, Some(0x1ED3D), 0x200),
    t(0x1EE00, Some(0x1EE03), 0x100),
    t(0x1EE05, Some(0x1EE1F), 0x100),
    t(0x1EE21, Some(0x1EE22), 0x100),
    t(0x1EE24, None, 0x100),
    t(0x1EE27, None, 0x100),
    t(0x1EE29, Some(0x1EE32), 0x100),
    t(0x1EE34, Some(0x1EE37), 0x100),
    t(0x1EE39, None, 0x100),
    t(0x1EE3B, None, 0x100),
    t(0x1EE42, None, 0x100),
    t(0x1EE47, None, 0x100),
    t(0x1EE49, None, 0x100),
    t(0x1EE4B, None, 0x100),
    t(0x1EE4D, Some(0x1EE4F), 0x100),
    t(0x1EE51, Some(0x1EE52), 0x100),
    t(0x1EE54, None, 0x100),
    t(0x1EE57, None, 0x100),
    t(0x1EE59, None, 0x100),
    t(0x1EE5B, None, 0x100),
    t(0x1EE5D, None, 0x100),
    t(0x1EE5F, None, 0x100),
    t(0x1EE61, Some(0x1EE62), 0x100),
    t(0x1EE64, None, 0x100),
    t(0x1EE67, Some(0x1EE6A), 0x100),
    t(0x1EE6C, Some(0x1EE72), 0x100),
    t(0x1EE74, Some(0x1EE77), 0x100),
    t(0x1EE79, Some(0x1EE7C), 0x100),
    t(0x1EE7E, None, 0x100),
    t(0x1EE80, Some(0x1EE89), 0x100),
    t(0x1EE8B, Some(0x1EE9B), 0x100),
    t(0x1EEA1, Some(0x1EEA3), 0x100),
    t(0x1EEA5, Some(0x1EEA9), 0x100),
    t(0x1EEAB, Some(0x1EEBB), 0x100),
    t(0x1EEF0, Some(0x1EEF1), 0x200),
    t(0x1F000, Some(0x1F02B), 0x200),
    t(0x1F030, Some(0x1F093), 0x200),
    t(0x1F0A0, Some(0x1F0AE), 0x200),
    t(0x1F0B1, Some(0x1F0BF), 0x200),
    t(0x1F0C1, Some(0x1F0CF), 0x200),
    t(0x1F0D1, Some(0x1F0F5), 0x200),
    t(0x1F100, Some(0x1F10A), 0x100),
    t(0x1F10B, Some(0x1F10F), 0x200),
    t(0x1F110, Some(0x1F12E), 0x100),
    t(0x1F12F, None, 0x200),
    t(0x1F130, Some(0x1F14F), 0x100),
    t(0x1F150, Some(0x1F169), 0x200),
    t(0x1F16A, Some(0x1F16C), 0x100),
    t(0x1F16D, Some(0x1F18F), 0x200),
    t(0x1F190, None, 0x100),
    t(0x1F191, Some(0x1F1AD), 0x200),
    t(0x1F1E6, Some(0x1F1FF), 0x200),
    t(0x1F200, Some(0x1F202), 0x100),
    t(0x1F210, Some(0x1F23B), 0x100),
    t(0x1F240, Some(0x1F248), 0x100),
    t(0x1F250, Some(0x1F251), 0x100),
    t(0x1F260, Some(0x1F265), 0x200),
    t(0x1F300, Some(0x1F54E), 0x200),
    t(0x1F54F, None, 0x280),
    t(0x1F550, Some(0x1F6D7), 0x200),
    t(0x1F6DD, Some(0x1F6EC), 0x200),
    t(0x1F6F0, Some(0x1F6FC), 0x200),
    t(0x1F700, Some(0x1F773), 0x200),
    t(0x1F780, Some(0x1F7D8), 0x200),
    t(0x1F7E0, Some(0x1F7EB), 0x200),
    t(0x1F7F0, None, 0x200),
    t(0x1F800, Some(0x1F80B), 0x200),
    t(0x1F810, Some(0x1F847), 0x200),
    t(0x1F850, Some(0x1F859), 0x200),
    t(0x1F860, Some(0x1F887), 0x200),
    t(0x1F890, Some(0x1F8AD), 0x200),
    t(0x1F8B0, Some(0x1F8B1), 0x200),
    t(0x1F900, Some(0x1FA53), 0x200),
    t(0x1FA60, Some(0x1FA6D), 0x200),
    t(0x1FA70, Some(0x1FA74), 0x200),
    t(0x1FA78, Some(0x1FA7C), 0x200),
    t(0x1FA80, Some(0x1FA86), 0x200),
    t(0x1FA90, Some(0x1FAAC), 0x200),
    t(0x1FAB0, Some(0x1FABA), 0x200),
    t(0x1FAC0, Some(0x1FAC5), 0x200),
    t(0x1FAD0, Some(0x1FAD9), 0x200),
    t(0x1FAE0, Some(0x1FAE7), 0x200),
    t(0x1FAF0, Some(0x1FAF6), 0x200),
    t(0x1FB00, Some(0x1FB92), 0x200),
    t(0x1FB94, Some(0x1FBCA), 0x200),
    t(0x1FBF0, Some(0x1FBF9), 0x100),
    t(0x20000, Some(0x2A6DF), 0x401),
    t(0x2A700, Some(0x2B738), 0x401),
    t(0x2B740, Some(0x2B81D), 0x401),
    t(0x2B820, Some(0x2CEA1), 0x401),
    t(0x2CEB0, Some(0x2EBE0), 0x401),
    t(0x2F800, Some(0x2FA1D), 0x100),
    t(0x30000, Some(0x3134A), 0x401),
    t(0xE0001, None, 0x002),
    t(0xE0020, Some(0xE007F), 0x800),
    t(0xE0100, Some(0xE01EF), 0x800),
];
