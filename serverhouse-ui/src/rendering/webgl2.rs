//! WebGL2 backend: one lit cube with a per-room fragment effect.
//!
//! Shaders, program, vertex array and buffers are created once in
//! [`WebGl2Renderer::new`] and reused for every frame.

use super::canvas_utils::{apply_backing_size, get_webgl2_context};
use super::shaders::{FRAGMENT_SHADER_SOURCE, UNIFORM_NAMES, VERTEX_SHADER_SOURCE};
use js_sys::{Float32Array, Uint16Array};
use serverhouse_core::config::{AMBIENT_COLOR, LIGHT_COLOR, LIGHT_POSITION, SERVER_COLOR};
use serverhouse_core::{
    BackendKind, CameraUniforms, CubeMesh, FrameParams, RenderError, RendererBackend, RoomType,
    ShaderStage, SurfaceSize,
};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

/// GPU objects owned by one renderer.
#[derive(Default)]
struct GlResources {
    shaders: Vec<WebGlShader>,
    program: Option<WebGlProgram>,
    vao: Option<WebGlVertexArrayObject>,
    buffers: Vec<WebGlBuffer>,
}

impl GlResources {
    /// Delete every handle. The handles stay recorded, now dead.
    fn release(&self, gl: &GL) {
        for buffer in &self.buffers {
            gl.delete_buffer(Some(buffer));
        }
        if let Some(vao) = &self.vao {
            gl.delete_vertex_array(Some(vao));
        }
        if let Some(program) = &self.program {
            for shader in &self.shaders {
                gl.detach_shader(program, shader);
            }
        }
        for shader in &self.shaders {
            gl.delete_shader(Some(shader));
        }
        if let Some(program) = &self.program {
            gl.delete_program(Some(program));
        }
    }
}

/// Locations for [`UNIFORM_NAMES`], in the same order.
struct Uniforms {
    projection_matrix: Option<WebGlUniformLocation>,
    model_view_matrix: Option<WebGlUniformLocation>,
    normal_matrix: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
    light_position: Option<WebGlUniformLocation>,
    light_color: Option<WebGlUniformLocation>,
    ambient_color: Option<WebGlUniformLocation>,
    server_color: Option<WebGlUniformLocation>,
    activity: Option<WebGlUniformLocation>,
    room_type: Option<WebGlUniformLocation>,
}

impl Uniforms {
    fn locate(gl: &GL, program: &WebGlProgram) -> Self {
        let [
            projection_matrix,
            model_view_matrix,
            normal_matrix,
            time,
            light_position,
            light_color,
            ambient_color,
            server_color,
            activity,
            room_type,
        ] = UNIFORM_NAMES.map(|name| {
            let location = gl.get_uniform_location(program, name);
            if location.is_none() {
                log::debug!("Uniform {name} is inactive");
            }
            location
        });
        Self {
            projection_matrix,
            model_view_matrix,
            normal_matrix,
            time,
            light_position,
            light_color,
            ambient_color,
            server_color,
            activity,
            room_type,
        }
    }
}

pub struct WebGl2Renderer {
    canvas: HtmlCanvasElement,
    gl: GL,
    resources: GlResources,
    uniforms: Uniforms,
    surface: SurfaceSize,
    destroyed: bool,
}

impl WebGl2Renderer {
    /// Acquire a WebGL2 context and build the pipeline. Anything allocated
    /// before a failure is deleted again.
    pub fn new(canvas: HtmlCanvasElement, surface: SurfaceSize) -> Result<Self, RenderError> {
        Self::with_shader_sources(canvas, surface, VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE)
    }

    /// [`new`](Self::new) with replacement GLSL sources.
    #[doc(hidden)]
    pub fn with_shader_sources(
        canvas: HtmlCanvasElement,
        surface: SurfaceSize,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, RenderError> {
        let gl = get_webgl2_context(&canvas)?;
        let (resources, uniforms) = build_or_release(&gl, vertex_source, fragment_source)
            .map_err(|(e, _released)| e)?;

        let mut renderer = Self {
            canvas,
            gl,
            resources,
            uniforms,
            surface,
            destroyed: false,
        };
        renderer.resize(surface);
        Ok(renderer)
    }

    pub fn context(&self) -> &GL {
        &self.gl
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Buffers currently held, for leak checks.
    pub fn buffers(&self) -> &[WebGlBuffer] {
        &self.resources.buffers
    }

    /// Draw the cube with `room`'s effect at `time` seconds.
    pub fn render_server_room(&mut self, room: RoomType, activity: f32, time: f32) {
        if self.destroyed {
            return;
        }
        let Some(program) = &self.resources.program else {
            return;
        };
        let gl = &self.gl;
        let u = &self.uniforms;
        let camera = CameraUniforms::new(self.surface.aspect());

        gl.use_program(Some(program));
        gl.bind_vertex_array(self.resources.vao.as_ref());

        gl.uniform_matrix4fv_with_f32_array(u.projection_matrix.as_ref(), false, &camera.projection);
        gl.uniform_matrix4fv_with_f32_array(u.model_view_matrix.as_ref(), false, &camera.model_view);
        gl.uniform_matrix4fv_with_f32_array(u.normal_matrix.as_ref(), false, &camera.normal);
        gl.uniform1f(u.time.as_ref(), time);
        gl.uniform3fv_with_f32_array(u.light_position.as_ref(), &LIGHT_POSITION);
        gl.uniform3fv_with_f32_array(u.light_color.as_ref(), &LIGHT_COLOR);
        gl.uniform3fv_with_f32_array(u.ambient_color.as_ref(), &AMBIENT_COLOR);
        gl.uniform3fv_with_f32_array(u.server_color.as_ref(), &SERVER_COLOR);
        gl.uniform1f(u.activity.as_ref(), activity);
        gl.uniform1i(u.room_type.as_ref(), room.shader_selector());

        gl.enable(GL::DEPTH_TEST);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
        gl.draw_elements_with_i32(
            GL::TRIANGLES,
            CubeMesh::INDEX_COUNT as i32,
            GL::UNSIGNED_SHORT,
            0,
        );

        gl.bind_vertex_array(None);
    }

    /// RGBA of one backing-store pixel, origin bottom-left.
    pub fn read_pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if self.destroyed {
            return None;
        }
        let mut pixel = [0u8; 4];
        self.gl
            .read_pixels_with_opt_u8_array(
                x,
                y,
                1,
                1,
                GL::RGBA,
                GL::UNSIGNED_BYTE,
                Some(&mut pixel),
            )
            .ok()?;
        Some(pixel)
    }
}

impl RendererBackend for WebGl2Renderer {
    fn kind(&self) -> BackendKind {
        BackendKind::WebGl2
    }

    fn clear(&mut self) {
        if self.destroyed {
            return;
        }
        self.gl.clear_color(0.0, 0.0, 0.0, 1.0);
        self.gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }

    fn resize(&mut self, surface: SurfaceSize) {
        if self.destroyed {
            return;
        }
        self.surface = surface;
        apply_backing_size(&self.canvas, &surface);
        self.gl.viewport(
            0,
            0,
            surface.backing_width() as i32,
            surface.backing_height() as i32,
        );
    }

    fn draw_frame(&mut self, frame: &FrameParams) {
        self.render_server_room(frame.room, frame.activity(), frame.time_secs as f32);
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        std::mem::take(&mut self.resources).release(&self.gl);
        log::debug!("WebGL2 renderer destroyed");
    }
}

impl Drop for WebGl2Renderer {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Build the pipeline. On failure everything created so far is deleted and
/// handed back alongside the error.
fn build_or_release(
    gl: &GL,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<(GlResources, Uniforms), (RenderError, GlResources)> {
    let mut resources = GlResources::default();
    match build_pipeline(gl, &mut resources, vertex_source, fragment_source) {
        Ok(uniforms) => Ok((resources, uniforms)),
        Err(e) => {
            resources.release(gl);
            Err((e, resources))
        }
    }
}

fn build_pipeline(
    gl: &GL,
    resources: &mut GlResources,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<Uniforms, RenderError> {
    let vertex = compile_shader(gl, ShaderStage::Vertex, vertex_source)?;
    resources.shaders.push(vertex.clone());
    let fragment = compile_shader(gl, ShaderStage::Fragment, fragment_source)?;
    resources.shaders.push(fragment.clone());

    let program = gl
        .create_program()
        .ok_or(RenderError::ResourceAllocation("shader program"))?;
    resources.program = Some(program.clone());
    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if !linked {
        let info = gl.get_program_info_log(&program).unwrap_or_default();
        return Err(RenderError::ProgramLink(info));
    }

    gl.use_program(Some(&program));
    let uniforms = Uniforms::locate(gl, &program);

    let vao = gl
        .create_vertex_array()
        .ok_or(RenderError::ResourceAllocation("vertex array"))?;
    resources.vao = Some(vao.clone());
    gl.bind_vertex_array(Some(&vao));

    upload_attribute(gl, resources, &program, "a_position", &CubeMesh::POSITIONS, 3)?;
    upload_attribute(gl, resources, &program, "a_normal", &CubeMesh::NORMALS, 3)?;
    upload_attribute(gl, resources, &program, "a_texCoord", &CubeMesh::TEX_COORDS, 2)?;

    let index_buffer = gl
        .create_buffer()
        .ok_or(RenderError::ResourceAllocation("index buffer"))?;
    resources.buffers.push(index_buffer.clone());
    gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&index_buffer));
    let indices = Uint16Array::from(&CubeMesh::INDICES[..]);
    gl.buffer_data_with_array_buffer_view(GL::ELEMENT_ARRAY_BUFFER, &indices, GL::STATIC_DRAW);

    gl.bind_vertex_array(None);
    Ok(uniforms)
}

fn compile_shader(gl: &GL, stage: ShaderStage, source: &str) -> Result<WebGlShader, RenderError> {
    let shader_type = match stage {
        ShaderStage::Vertex => GL::VERTEX_SHADER,
        ShaderStage::Fragment => GL::FRAGMENT_SHADER,
    };
    let shader = gl
        .create_shader(shader_type)
        .ok_or(RenderError::ResourceAllocation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(RenderError::ShaderCompile { stage, log })
    }
}

/// Upload `data` into a new buffer bound to attribute `name` in the
/// currently bound vertex array.
fn upload_attribute(
    gl: &GL,
    resources: &mut GlResources,
    program: &WebGlProgram,
    name: &str,
    data: &[f32],
    components: i32,
) -> Result<(), RenderError> {
    let buffer = gl
        .create_buffer()
        .ok_or(RenderError::ResourceAllocation("vertex buffer"))?;
    resources.buffers.push(buffer.clone());
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let view = Float32Array::from(data);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &view, GL::STATIC_DRAW);

    let location = gl.get_attrib_location(program, name);
    if location < 0 {
        log::debug!("Attribute {name} is inactive");
        return Ok(());
    }
    let location = location as u32;
    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer_with_i32(location, components, GL::FLOAT, false, 0, 0);
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    // Statically reads a varying the vertex stage never writes
    const UNLINKABLE_FRAGMENT: &str = r#"#version 300 es
precision highp float;
in vec3 v_unwritten;
out vec4 outColor;
void main() {
    outColor = vec4(v_unwritten, 1.0);
}
"#;

    fn webgl2() -> Option<GL> {
        let document = web_sys::window()?.document()?;
        let canvas: HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
        get_webgl2_context(&canvas).ok()
    }

    #[wasm_bindgen_test]
    fn compile_failure_deletes_the_compiled_vertex_shader() {
        let Some(gl) = webgl2() else {
            return;
        };
        let Err((error, released)) = build_or_release(&gl, VERTEX_SHADER_SOURCE, "not glsl") else {
            panic!("broken fragment source built");
        };

        assert!(matches!(
            error,
            RenderError::ShaderCompile {
                stage: ShaderStage::Fragment,
                ..
            }
        ));
        assert_eq!(released.shaders.len(), 1);
        assert!(released.shaders.iter().all(|s| !gl.is_shader(Some(s))));
        assert!(released.program.is_none());
        assert!(released.buffers.is_empty());
    }

    #[wasm_bindgen_test]
    fn link_failure_deletes_program_and_shaders() {
        let Some(gl) = webgl2() else {
            return;
        };
        let Err((error, released)) =
            build_or_release(&gl, VERTEX_SHADER_SOURCE, UNLINKABLE_FRAGMENT)
        else {
            panic!("mismatched stages linked");
        };

        assert!(matches!(error, RenderError::ProgramLink(_)));
        assert_eq!(released.shaders.len(), 2);
        assert!(released.shaders.iter().all(|s| !gl.is_shader(Some(s))));
        let program = released.program.as_ref().expect("program was created");
        assert!(!gl.is_program(Some(program)));
        assert!(released.buffers.iter().all(|b| !gl.is_buffer(Some(b))));
    }

    #[wasm_bindgen_test]
    fn successful_build_keeps_everything_alive() {
        let Some(gl) = webgl2() else {
            return;
        };
        let Ok((resources, _uniforms)) =
            build_or_release(&gl, VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE)
        else {
            panic!("bundled shaders failed to build");
        };

        assert_eq!(resources.buffers.len(), 4);
        assert!(resources.buffers.iter().all(|b| gl.is_buffer(Some(b))));
        resources.release(&gl);
        assert!(resources.buffers.iter().all(|b| !gl.is_buffer(Some(b))));
    }
}
