#[cfg(feature = "simdutf8")]
use simdutf8::basic as simd_utf8;

/// Validates UTF-8 bytes and returns a borrowed `&str` on success.
#[inline]
pub fn validate(bytes: &[u8]) -> Option<&str> {
    #[cfg(feature = "simdutf8")]
    {
        simd_utf8::from_utf8(bytes).ok()
    }

    #[cfg(not(feature = "simdutf8"))]
    {
        core::str::from_utf8(bytes).ok()
    }
}
