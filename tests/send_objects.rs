#[allow(dead_code)]
fn needs_send<T: Send + ?Sized>() {}

#[allow(dead_code)]
fn needs_sync<T: Sync + ?Sized>() {}

#[test]
fn triangle_send() {
    // ensures the triangle renderer can move onto the thread owning the GL context
    needs_send::<trigon::triangle::TriangleRenderer>();
    needs_send::<trigon::triangle::TriangleFactory>();
    needs_sync::<trigon::triangle::TriangleFactory>();
}

#[test]
fn egl_loader_send_sync() {
    needs_send::<trigon::egl::Egl>();
    needs_sync::<trigon::egl::Egl>();
}

#[test]
fn errors_send() {
    needs_send::<trigon::AppError>();
    needs_send::<trigon::RendererError>();
    needs_send::<trigon::egl::EglError>();
}
