//! Symbols the activity binds its `native` methods to.

use std::ffi::c_void;

use jni::objects::JObject;
use jni::sys::{jint, jlong, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};
use tracing::{error, info};

use crate::{bridge, logging};

const ILLEGAL_STATE: &str = "java/lang/IllegalStateException";

#[allow(non_snake_case)]
#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _: *mut c_void) -> jint {
    logging::init();
    match bridge::guarded("JNI_OnLoad", bridge::load) {
        Ok(()) => info!(tag = logging::TAG, "triangle renderer registered"),
        Err(error) => error!(%error, "triangle renderer unavailable"),
    }
    JNI_VERSION_1_6
}

/// `long nativeCreateRenderer(ClassLoader, Context)`.
///
/// Throws `IllegalStateException` and returns `0` when no renderer could be created.
#[no_mangle]
pub extern "system" fn Java_com_example_jm_android_1simple_1triangle_MainActivity_nativeCreateRenderer<
    'local,
>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    _class_loader: JObject<'local>,
    _context: JObject<'local>,
) -> jlong {
    match bridge::guarded("nativeCreateRenderer", bridge::create_renderer) {
        Ok(handle) => handle.into_raw(),
        Err(error) => {
            error!(%error, "failed to create renderer");
            if let Err(throw_error) = env.throw_new(ILLEGAL_STATE, error.to_string()) {
                error!(%throw_error, "failed to raise exception");
            }
            0
        },
    }
}

/// `void nativeInitializeGl(long)`, from `onSurfaceCreated`.
#[no_mangle]
pub extern "system" fn Java_com_example_jm_android_1simple_1triangle_MainActivity_nativeInitializeGl<
    'local,
>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
    handle: jlong,
) {
    bridge::report("nativeInitializeGl", || bridge::initialize_gl(handle));
}

/// `void nativeSetViewport(long, int, int)`, from `onSurfaceChanged`.
#[no_mangle]
pub extern "system" fn Java_com_example_jm_android_1simple_1triangle_MainActivity_nativeSetViewport<
    'local,
>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
    handle: jlong,
    width: jint,
    height: jint,
) {
    bridge::report("nativeSetViewport", || bridge::set_viewport(handle, width, height));
}

/// `long nativeDrawFrame(long)`, from `onDrawFrame`. Returns `0` on failure.
#[no_mangle]
pub extern "system" fn Java_com_example_jm_android_1simple_1triangle_MainActivity_nativeDrawFrame<
    'local,
>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
    handle: jlong,
) -> jlong {
    bridge::report("nativeDrawFrame", || bridge::draw_frame(handle)).unwrap_or(0)
}

/// `void nativeDestroyRenderer(long)`, from `onDestroy`.
#[no_mangle]
pub extern "system" fn Java_com_example_jm_android_1simple_1triangle_MainActivity_nativeDestroyRenderer<
    'local,
>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
    handle: jlong,
) {
    bridge::report("nativeDestroyRenderer", || bridge::destroy_renderer(handle));
}
