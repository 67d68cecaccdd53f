//! GLSL ES 3.00 sources for the WebGL2 room cube.

pub const VERTEX_SHADER_SOURCE: &str = r#"#version 300 es
in vec4 a_position;
in vec2 a_texCoord;
in vec3 a_normal;

uniform mat4 u_projectionMatrix;
uniform mat4 u_modelViewMatrix;
uniform mat4 u_normalMatrix;
uniform float u_time;

out vec2 v_texCoord;
out vec3 v_normal;
out vec3 v_position;
out float v_time;

void main() {
    v_texCoord = a_texCoord;
    v_normal = (u_normalMatrix * vec4(a_normal, 0.0)).xyz;
    v_position = (u_modelViewMatrix * a_position).xyz;
    v_time = u_time;
    gl_Position = u_projectionMatrix * u_modelViewMatrix * a_position;
}
"#;

/// Room selector `u_roomType`:
/// 0 LED blink + hologram, 1 blue sweep, 2 orange grid, 3 purple noise
/// blocks, 4 radial green wave, 5 yellow pulse.
pub const FRAGMENT_SHADER_SOURCE: &str = r#"#version 300 es
precision highp float;

in vec2 v_texCoord;
in vec3 v_normal;
in vec3 v_position;
in float v_time;

uniform vec3 u_lightPosition;
uniform vec3 u_lightColor;
uniform vec3 u_ambientColor;
uniform vec3 u_serverColor;
uniform float u_activity;
uniform int u_roomType;

out vec4 outColor;

float noise(vec2 uv) {
    return fract(sin(dot(uv, vec2(12.9898, 78.233))) * 43758.5453);
}

float ledBlink(vec2 uv, float time) {
    float led = step(0.8, sin(uv.x * 20.0) * sin(uv.y * 10.0));
    return led * (0.5 + 0.5 * sin(time * 5.0));
}

vec3 hologram(vec2 uv, float time) {
    float scanline = sin(uv.y * 800.0 + time * 10.0) * 0.1;
    float interference = noise(uv + time) * 0.05;
    return vec3(0.0, 1.0, 1.0) * (scanline + interference);
}

vec3 roomEffect(vec2 uv, int roomType, float time, float activity) {
    vec3 color = u_serverColor;

    if (roomType == 0) {
        color += ledBlink(uv, time) * vec3(0.0, 1.0, 0.0) * activity;
        color += hologram(uv, time) * 0.3;
    } else if (roomType == 1) {
        color += vec3(0.2, 0.6, 1.0) * sin(time * 2.0 + uv.x * 10.0) * 0.3;
    } else if (roomType == 2) {
        float grid = step(0.95, sin(uv.x * 50.0)) + step(0.95, sin(uv.y * 50.0));
        color += vec3(1.0, 0.5, 0.0) * grid * 0.4;
    } else if (roomType == 3) {
        float boxes = step(0.7, noise(uv * 10.0));
        color += vec3(0.5, 0.0, 1.0) * boxes * 0.3;
    } else if (roomType == 4) {
        float waves = sin(length(uv - 0.5) * 20.0 - time * 5.0) * 0.5 + 0.5;
        color += vec3(0.0, 1.0, 0.5) * waves * 0.4;
    } else if (roomType == 5) {
        float pulse = sin(time * 3.0) * 0.5 + 0.5;
        color += vec3(1.0, 1.0, 0.0) * pulse * 0.3;
    }

    return color;
}

void main() {
    vec3 normal = normalize(v_normal);
    vec3 lightDir = normalize(u_lightPosition - v_position);
    float lambert = max(dot(normal, lightDir), 0.0);

    vec3 lighting = u_ambientColor + u_lightColor * lambert;
    vec3 finalColor = lighting * roomEffect(v_texCoord, u_roomType, v_time, u_activity);

    float glow = 1.0 - length(v_texCoord - 0.5) * 2.0;
    finalColor += vec3(0.1, 0.3, 0.6) * glow * u_activity * 0.2;

    outColor = vec4(finalColor, 1.0);
}
"#;

/// Uniforms resolved once after linking.
pub const UNIFORM_NAMES: [&str; 10] = [
    "u_projectionMatrix",
    "u_modelViewMatrix",
    "u_normalMatrix",
    "u_time",
    "u_lightPosition",
    "u_lightColor",
    "u_ambientColor",
    "u_serverColor",
    "u_activity",
    "u_roomType",
];
