/// Color tokens shared by every page.
pub mod theme {
    pub const WHITE: u32 = 0xFFFFFF;

    pub const GRAY_50: u32 = 0xF9FAFB;
    pub const GRAY_100: u32 = 0xF3F4F6;
    pub const GRAY_200: u32 = 0xE5E7EB;
    pub const GRAY_300: u32 = 0xD1D5DB;
    pub const GRAY_400: u32 = 0x9CA3AF;
    pub const GRAY_500: u32 = 0x6B7280;
    pub const GRAY_600: u32 = 0x4B5563;
    pub const GRAY_700: u32 = 0x374151;
    pub const GRAY_900: u32 = 0x111827;

    pub const BG: u32 = WHITE;
    pub const BG_HOVER: u32 = GRAY_100;
    pub const FG: u32 = GRAY_900;
    pub const FG_SECONDARY: u32 = GRAY_500;
    pub const MUTED: u32 = GRAY_400;
    pub const BORDER: u32 = GRAY_200;

    // Tab strip
    pub const TAB_BG: u32 = GRAY_100;
    pub const TAB_HOVER: u32 = GRAY_200;
    pub const TAB_TEXT: u32 = GRAY_600;
    pub const TAB_ACTIVE_BG: u32 = WHITE;
    pub const TAB_ACTIVE_TEXT: u32 = ACCENT;

    pub const ACCENT: u32 = 0x3B82F6;
    pub const ACCENT_LIGHT: u32 = 0xDCEEFF;

    // Root check status
    pub const SUCCESS: u32 = 0x16A34A;
    pub const DANGER: u32 = 0xDC2626;
}
