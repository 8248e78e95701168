use std::sync::Arc;
use std::time::{Duration, Instant};

use glow::HasContext;
use tracing::{debug, info, warn};
use trigon_core::attributes::RendererAttributes;
use trigon_core::dpi::PhysicalSize;
use trigon_core::error::RendererError;
use trigon_core::renderer::{ProcAddressLoader, Renderer};

use crate::scene::{self, COLOR_OFFSET, STRIDE, VERTICES};
use crate::shader::Program;

/// GL objects living on one context.
struct GlState {
    gl: glow::Context,
    program: Program,
    vbo: glow::NativeBuffer,
    vertex_location: u32,
    color_location: u32,
    pmv_matrix_location: Option<glow::NativeUniformLocation>,
    fade_location: Option<glow::NativeUniformLocation>,
}

// The state is created, used and deleted on the thread owning the GL context; the renderer is
// only moved between threads while no GL call is in flight.
unsafe impl Send for GlState {}

/// Draws the fading triangle.
pub struct TriangleRenderer {
    loader: Arc<dyn ProcAddressLoader>,
    clear_color: [f32; 4],
    fade_period: Duration,
    ratio: f32,
    start: Instant,
    state: Option<GlState>,
}

impl std::fmt::Debug for TriangleRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriangleRenderer")
            .field("clear_color", &self.clear_color)
            .field("fade_period", &self.fade_period)
            .field("ratio", &self.ratio)
            .field("initialized", &self.state.is_some())
            .finish_non_exhaustive()
    }
}

impl TriangleRenderer {
    pub fn new(loader: Arc<dyn ProcAddressLoader>, attributes: &RendererAttributes) -> Self {
        Self {
            loader,
            clear_color: attributes.clear_color,
            fade_period: attributes.fade_period,
            ratio: 1.0,
            start: Instant::now(),
            state: None,
        }
    }

    /// Width over height of the last viewport.
    pub fn aspect_ratio(&self) -> f32 {
        self.ratio
    }

    unsafe fn create_state(&self) -> Result<GlState, RendererError> {
        let loader = self.loader.clone();
        let gl = glow::Context::from_loader_function(|name| loader.get_proc_address(name));
        info!(version = %gl.get_parameter_string(glow::VERSION), "loaded GL");

        let vbo = gl.create_buffer().map_err(RendererError::Gl)?;
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck::cast_slice(&VERTICES),
            glow::STATIC_DRAW,
        );
        gl.bind_buffer(glow::ARRAY_BUFFER, None);

        let program = match Program::build(&gl) {
            Ok(program) => program,
            Err(err) => {
                gl.delete_buffer(vbo);
                return Err(err);
            },
        };

        let locations = gl
            .get_attrib_location(program.program, "vertex")
            .zip(gl.get_attrib_location(program.program, "color"));
        let Some((vertex_location, color_location)) = locations else {
            program.delete(&gl);
            gl.delete_buffer(vbo);
            return Err(RendererError::Gl("vertex attributes not found in program".into()));
        };
        let pmv_matrix_location = gl.get_uniform_location(program.program, "pmv_matrix");
        let fade_location = gl.get_uniform_location(program.program, "fade");

        gl.enable(glow::BLEND);
        gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);

        Ok(GlState {
            gl,
            program,
            vbo,
            vertex_location,
            color_location,
            pmv_matrix_location,
            fade_location,
        })
    }
}

impl Renderer for TriangleRenderer {
    fn initialize_gl(&mut self) -> Result<(), RendererError> {
        if self.state.take().is_some() {
            debug!("forgetting GL objects of a previous context");
        }
        self.state = Some(unsafe { self.create_state()? });
        self.start = Instant::now();
        Ok(())
    }

    fn release_gl(&mut self) {
        let Some(state) = self.state.take() else {
            return;
        };
        unsafe {
            state.program.delete(&state.gl);
            state.gl.delete_buffer(state.vbo);
        }
    }

    fn set_viewport(&mut self, size: PhysicalSize<u32>) {
        self.ratio = scene::aspect_ratio(size);
        info!(width = size.width, height = size.height, ratio = self.ratio, "viewport changed");
        match &self.state {
            Some(state) => unsafe {
                state.gl.viewport(0, 0, size.width as i32, size.height as i32);
            },
            None => warn!("viewport set without GL resources"),
        }
    }

    fn draw_frame(&mut self) -> Result<(), RendererError> {
        let state = self
            .state
            .as_ref()
            .ok_or(RendererError::Lifecycle { handle: None, operation: "draw_frame" })?;
        let fade = scene::fade(self.start.elapsed(), self.fade_period);
        let projection = scene::projection(self.ratio);
        let [red, green, blue, alpha] = self.clear_color;
        let gl = &state.gl;

        unsafe {
            gl.clear_color(red, green, blue, alpha);
            gl.clear(glow::COLOR_BUFFER_BIT);

            gl.use_program(Some(state.program.program));
            gl.uniform_matrix_4_f32_slice(state.pmv_matrix_location.as_ref(), false, &projection);
            gl.uniform_1_f32(state.fade_location.as_ref(), fade);

            gl.enable_vertex_attrib_array(state.vertex_location);
            gl.enable_vertex_attrib_array(state.color_location);
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(state.vbo));
            gl.vertex_attrib_pointer_f32(state.vertex_location, 3, glow::FLOAT, false, STRIDE, 0);
            gl.vertex_attrib_pointer_f32(
                state.color_location,
                3,
                glow::FLOAT,
                false,
                STRIDE,
                COLOR_OFFSET,
            );
            gl.draw_arrays(glow::TRIANGLES, 0, VERTICES.len() as i32);
            gl.disable_vertex_attrib_array(state.vertex_location);
            gl.disable_vertex_attrib_array(state.color_location);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            // The flags may predate this frame, so they are reported rather than failing it.
            for error in pending_errors(|| gl.get_error()) {
                warn!(error = format_args!("0x{error:04x}"), "GL error flag set after draw");
            }
        }
        Ok(())
    }
}

/// Upper bound on flags read per frame; a lost context may report errors forever.
const MAX_PENDING_ERRORS: usize = 8;

/// Read GL error flags until `NO_ERROR`, returning the ones that were set.
fn pending_errors(mut get_error: impl FnMut() -> u32) -> Vec<u32> {
    std::iter::from_fn(|| match get_error() {
        glow::NO_ERROR => None,
        error => Some(error),
    })
    .take(MAX_PENDING_ERRORS)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_errors_are_drained_in_order() {
        let mut flags = vec![glow::INVALID_VALUE, glow::INVALID_OPERATION].into_iter();
        let errors = pending_errors(|| flags.next().unwrap_or(glow::NO_ERROR));
        assert_eq!(errors, [glow::INVALID_VALUE, glow::INVALID_OPERATION]);
    }

    #[test]
    fn clean_state_reports_nothing() {
        assert!(pending_errors(|| glow::NO_ERROR).is_empty());
    }

    #[test]
    fn sticky_errors_are_bounded() {
        let errors = pending_errors(|| glow::OUT_OF_MEMORY);
        assert_eq!(errors.len(), MAX_PENDING_ERRORS);
    }
}
