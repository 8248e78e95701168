use tracing::error;
use trigon::attributes::RendererAttributes;
use trigon::winit::event_loop::EventLoop;
use trigon::winit::platform::android::activity::AndroidApp;
use trigon::winit::platform::android::EventLoopBuilderExtAndroid;

use crate::logging;

/// Entry point when the library is loaded by a `NativeActivity` instead of the Java activity.
#[no_mangle]
fn android_main(app: AndroidApp) {
    logging::init();
    let event_loop = match EventLoop::builder().with_android_app(app).build() {
        Ok(event_loop) => event_loop,
        Err(error) => {
            error!(%error, "failed to create event loop");
            return;
        },
    };
    if let Err(error) = trigon::run(event_loop, RendererAttributes::default()) {
        error!(%error, "triangle app stopped");
    }
}
