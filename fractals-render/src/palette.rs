use fractals_core::EscapeResult;

pub const BLACK: [u8; 4] = [0, 0, 0, 255];
pub const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Map an escape result to an opaque RGBA color.
///
/// Escaped samples cycle through three independent channel ramps
/// (`k·1000`, `k·1055`, `k·1111`, each mod 255); bounded samples are white.
#[inline]
pub fn escape_color(result: EscapeResult) -> [u8; 4] {
    match result {
        EscapeResult::Escaped(k) => {
            let k = k as u64;
            [
                (k * 1000 % 255) as u8,
                (k * 1055 % 255) as u8,
                (k * 1111 % 255) as u8,
                255,
            ]
        }
        EscapeResult::Bounded => WHITE,
    }
}
