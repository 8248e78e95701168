use cfg_aliases::cfg_aliases;

fn main() {
    cfg_aliases! {
        // Platforms
        linux_platform: {
            any(
                target_os = "linux",
                target_os = "dragonfly",
                target_os = "freebsd",
                target_os = "netbsd",
                target_os = "openbsd"
            )
        },
        x11_platform: { all(linux_platform, feature = "x11") },
    }
}
