use std::error::Error;

#[cfg(x11_platform)]
fn main() -> Result<(), Box<dyn Error>> {
    use tracing_subscriber::EnvFilter;
    use trigon::attributes::RendererAttributes;
    use winit::event_loop::EventLoop;
    use winit::platform::x11::EventLoopBuilderExtX11;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // EGL is bootstrapped from an Xlib display, so Wayland sessions go through XWayland.
    let event_loop = EventLoop::builder().with_x11().build()?;
    trigon::run(event_loop, RendererAttributes::default())?;
    Ok(())
}

#[cfg(not(x11_platform))]
fn main() -> Result<(), Box<dyn Error>> {
    Err("simple-triangle needs the X11 backend on a Linux or BSD desktop".into())
}
