//! Codec policy for daily movie encoding.
//!
//! A static dispatch table keyed on platform and host version. This is
//! data, not logic: the settings are transcribed unchanged from the
//! encoder configurations existing review pipelines expect, including the
//! vendor-opaque QuickTime configuration blob, which is carried verbatim
//! as a string and never decoded.
//!
//! The host-version gates mirror the writer-node history of the host
//! application: version 9 replaced the external FFmpeg writer with the
//! bundled mov64 writer on Linux, and 10.0v2 dropped the dependency on the
//! QuickTime desktop libraries on macOS and Windows.

use daily_core::{HostVersion, Platform};

/// Opaque QuickTime encoder configuration for the photo-JPEG movie preset.
///
/// Vendor-private binary format, hex-encoded. Preserved byte-for-byte for
/// output compatibility; do not reinterpret or regenerate.
pub const QUICKTIME_SETTINGS_BLOB: &str = "000000000000000000000000000019a7365616e0000000100000001000000000000018676696465000000010000000e00000000000000227370746c0000000100000000000000006a706567000000000018000003ff000000207470726c000000010000000000000000000000000017f9db00000000000000246472617400000001000000000000000000000000000000530000010000000100000000156d70736f00000001000000000000000000000000186d66726100000001000000000000000000000000000000187073667200000001000000000000000000000000000000156266726100000001000000000000000000000000166d70657300000001000000000000000000000000002868617264000000010000000000000000000000000000000000000000000000000000000000000016656e647300000001000000000000000000000000001663666c67000000010000000000000000004400000018636d66720000000100000000000000006170706c00000014636c75740000000100000000000000000000001c766572730000000100000000000000000003001c00010000";

/// A single writer-node parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KnobValue {
    /// Text parameter.
    Text(&'static str),
    /// Numeric parameter.
    Number(f64),
}

/// Settings applied to the movie writer for one (platform, host version)
/// combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodecSettings {
    /// Writer file type.
    pub file_type: &'static str,
    /// Writer parameters, in application order.
    pub knobs: &'static [(&'static str, KnobValue)],
}

impl CodecSettings {
    /// Returns the value for a named writer parameter, if present.
    pub fn knob(&self, name: &str) -> Option<&KnobValue> {
        self.knobs
            .iter()
            .find(|(knob, _)| *knob == name)
            .map(|(_, value)| value)
    }
}

// Bundled mov64 writer, Linux (host 9.0v1 and newer).
static LINUX_MOV64: CodecSettings = CodecSettings {
    file_type: "mov64",
    knobs: &[
        ("mov64_codec", KnobValue::Text("jpeg")),
        ("mov64_quality_max", KnobValue::Text("3")),
    ],
};

// External FFmpeg writer, Linux (hosts before 9.0v1).
static LINUX_FFMPEG: CodecSettings = CodecSettings {
    file_type: "ffmpeg",
    knobs: &[("format", KnobValue::Text("MOV format (mov)"))],
};

// Bundled mov64 writer, macOS/Windows (10.0v2 and newer, QuickTime
// desktop dependency removed; the opaque blob is gone in this layout).
static DESKTOP_MOV64: CodecSettings = CodecSettings {
    file_type: "mov64",
    knobs: &[
        ("meta_codec", KnobValue::Text("jpeg")),
        ("mov64_quality_max", KnobValue::Text("3")),
    ],
};

// QuickTime writer, macOS/Windows, host 9.x (codec knob renamed to
// meta_codec in 9.0v1).
static DESKTOP_QUICKTIME_V9: CodecSettings = CodecSettings {
    file_type: "mov",
    knobs: &[
        ("meta_codec", KnobValue::Text("jpeg")),
        ("mov64_quality_max", KnobValue::Text("3")),
        ("fps", KnobValue::Number(23.975_999_83)),
        ("settings", KnobValue::Text(QUICKTIME_SETTINGS_BLOB)),
    ],
};

// QuickTime writer, macOS/Windows, hosts before 9.0v1.
static DESKTOP_QUICKTIME_LEGACY: CodecSettings = CodecSettings {
    file_type: "mov",
    knobs: &[
        ("codec", KnobValue::Text("jpeg")),
        ("fps", KnobValue::Number(23.975_999_83)),
        ("settings", KnobValue::Text(QUICKTIME_SETTINGS_BLOB)),
    ],
};

/// Selects the movie writer settings for a platform and host version.
///
/// Pure and deterministic: the same inputs always return the identical
/// `'static` settings value.
pub fn select_codec(platform: Platform, version: HostVersion) -> &'static CodecSettings {
    match platform {
        Platform::Linux => {
            if version.major >= 9 {
                &LINUX_MOV64
            } else {
                &LINUX_FFMPEG
            }
        }
        Platform::MacOs | Platform::Windows => {
            if version.major >= 10 && (version.minor > 1 || version.release > 1) {
                &DESKTOP_MOV64
            } else if version.major >= 9 {
                &DESKTOP_QUICKTIME_V9
            } else {
                &DESKTOP_QUICKTIME_LEGACY
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> HostVersion {
        s.parse().unwrap()
    }

    #[test]
    fn test_linux_gating() {
        assert_eq!(select_codec(Platform::Linux, v("9.0v1")).file_type, "mov64");
        assert_eq!(select_codec(Platform::Linux, v("12.2v4")).file_type, "mov64");
        let legacy = select_codec(Platform::Linux, v("8.5v3"));
        assert_eq!(legacy.file_type, "ffmpeg");
        assert_eq!(
            legacy.knob("format"),
            Some(&KnobValue::Text("MOV format (mov)"))
        );
    }

    #[test]
    fn test_desktop_quicktime_removal_boundary() {
        // 10.0v2 dropped the QuickTime desktop dependency; 10.0v1 and
        // 10.1v1 still carry it.
        for platform in [Platform::MacOs, Platform::Windows] {
            assert_eq!(select_codec(platform, v("10.0v2")).file_type, "mov64");
            assert_eq!(select_codec(platform, v("10.2v1")).file_type, "mov64");
            assert_eq!(select_codec(platform, v("10.0v1")).file_type, "mov");
            assert_eq!(select_codec(platform, v("10.1v1")).file_type, "mov");
        }
    }

    #[test]
    fn test_desktop_codec_knob_rename() {
        let v9 = select_codec(Platform::MacOs, v("9.0v1"));
        assert!(v9.knob("meta_codec").is_some());
        assert!(v9.knob("codec").is_none());

        let legacy = select_codec(Platform::MacOs, v("8.0v1"));
        assert!(legacy.knob("codec").is_some());
        assert!(legacy.knob("meta_codec").is_none());
    }

    #[test]
    fn test_quicktime_blob_carried_on_legacy_layouts() {
        for version in ["8.0v1", "9.0v1", "10.0v1"] {
            let settings = select_codec(Platform::Windows, v(version));
            assert_eq!(
                settings.knob("settings"),
                Some(&KnobValue::Text(QUICKTIME_SETTINGS_BLOB))
            );
            assert_eq!(settings.knob("fps"), Some(&KnobValue::Number(23.975_999_83)));
        }
        assert!(
            select_codec(Platform::Windows, v("10.0v2"))
                .knob("settings")
                .is_none()
        );
    }

    #[test]
    fn test_selection_is_deterministic() {
        let a = select_codec(Platform::MacOs, v("9.0v1"));
        let b = select_codec(Platform::MacOs, v("9.0v1"));
        assert!(std::ptr::eq(a, b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_blob_is_untouched_hex() {
        assert_eq!(QUICKTIME_SETTINGS_BLOB.len(), 843);
        assert!(
            QUICKTIME_SETTINGS_BLOB
                .chars()
                .all(|c| c.is_ascii_hexdigit())
        );
    }
}
