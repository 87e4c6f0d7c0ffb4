//! Colors in ARGB8888 format.

pub const BACKGROUND: u32 = 0xFF1E1E1E;
pub const GRID: u32 = 0xFF333333;
pub const MAGENTA: u32 = 0xFFFF00FF;
pub const CYAN: u32 = 0xFF00FFFF;
pub const YELLOW: u32 = 0xFFFFFF00;

/// Split a packed ARGB color into RGBA bytes.
#[inline]
pub fn to_rgba(argb: u32) -> [u8; 4] {
    let [a, r, g, b] = argb.to_be_bytes();
    [r, g, b, a]
}
