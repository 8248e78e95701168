/// Tag the activity's log lines appear under in `logcat`.
pub(crate) const TAG: &str = "native-lib";

/// Route `tracing` output to `logcat`.
///
/// No `tracing` subscriber is installed, so events fall back to `log` records, which
/// `android_logger` writes under [`TAG`]. Safe to call more than once.
#[cfg(target_os = "android")]
pub(crate) fn init() {
    android_logger::init_once(
        android_logger::Config::default().with_tag(TAG).with_max_level(log::LevelFilter::Info),
    );
}

#[cfg(not(target_os = "android"))]
pub(crate) fn init() {}
