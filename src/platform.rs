/// Host platform information for release layout selection
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub os: String,
    pub arch: String,
}

impl Platform {
    /// Detect the current platform
    pub fn detect() -> Self {
        Self {
            os: Self::detect_os(),
            arch: Self::detect_arch(),
        }
    }

    fn detect_os() -> String {
        #[cfg(target_os = "macos")]
        {
            "macos".to_string()
        }
        #[cfg(target_os = "linux")]
        {
            "linux".to_string()
        }
        #[cfg(target_os = "windows")]
        {
            "windows".to_string()
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            std::env::consts::OS.to_string()
        }
    }

    fn detect_arch() -> String {
        #[cfg(target_arch = "x86_64")]
        {
            "x86_64".to_string()
        }
        #[cfg(target_arch = "aarch64")]
        {
            "aarch64".to_string()
        }
        #[cfg(target_arch = "x86")]
        {
            "i686".to_string()
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "x86")))]
        {
            std::env::consts::ARCH.to_string()
        }
    }

    /// Whether the Windows asset-layout convention applies (build artifacts
    /// sit directly in the variant directory instead of its lib/bin subdirs).
    pub fn is_windows(&self) -> bool {
        self.os == "windows"
    }

    /// Directory name namespacing the release tree: OS family, architecture
    /// and the default toolchain for that family (MSVC 14.2 on Windows,
    /// gcc 10 everywhere else).
    pub fn release_triple(&self) -> String {
        let arch = Self::arch_token(&self.arch);
        if self.is_windows() {
            format!("win_{}_msvc142", arch)
        } else {
            format!("unix_{}_gcc10", arch)
        }
    }

    fn arch_token(arch: &str) -> &str {
        match arch {
            "x86_64" | "amd64" => "x64",
            "aarch64" => "arm64",
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_detect() {
        let platform = Platform::detect();

        // Should return non-empty strings
        assert!(!platform.os.is_empty());
        assert!(!platform.arch.is_empty());

        // On known platforms, verify expected values
        #[cfg(target_os = "macos")]
        assert_eq!(platform.os, "macos");

        #[cfg(target_os = "linux")]
        assert_eq!(platform.os, "linux");

        #[cfg(target_os = "windows")]
        assert_eq!(platform.os, "windows");

        #[cfg(target_arch = "x86_64")]
        assert_eq!(platform.arch, "x86_64");

        #[cfg(target_arch = "aarch64")]
        assert_eq!(platform.arch, "aarch64");
    }

    #[test]
    fn test_release_triple_windows() {
        let platform = Platform {
            os: "windows".into(),
            arch: "x86_64".into(),
        };
        assert!(platform.is_windows());
        assert_eq!(platform.release_triple(), "win_x64_msvc142");
    }

    #[test]
    fn test_release_triple_unix() {
        let platform = Platform {
            os: "linux".into(),
            arch: "x86_64".into(),
        };
        assert!(!platform.is_windows());
        assert_eq!(platform.release_triple(), "unix_x64_gcc10");
    }

    #[test]
    fn test_release_triple_arch_tokens() {
        let platform = Platform {
            os: "macos".into(),
            arch: "aarch64".into(),
        };
        assert_eq!(platform.release_triple(), "unix_arm64_gcc10");

        let platform = Platform {
            os: "linux".into(),
            arch: "riscv64".into(),
        };
        assert_eq!(platform.release_triple(), "unix_riscv64_gcc10");
    }
}
