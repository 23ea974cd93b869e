pub mod error;
pub mod mesh;
pub mod opengl;
pub mod utils;

#[cfg(test)]
mod test {
    use super::error::GraphicsError;
    use super::mesh::{vertex_count, VERTEX_COMPONENTS};
    use super::opengl::GlShaderType;
    use super::utils::{load_shader_source, normalize_source};

    #[test]
    fn vertex_count_is_length_over_three() {
        assert_eq!(VERTEX_COMPONENTS, 3);
        assert_eq!(vertex_count(18), 6);
        assert_eq!(vertex_count(12), 4);
        assert_eq!(vertex_count(3), 1);
        assert_eq!(vertex_count(0), 0);
    }

    #[test]
    fn malformed_lengths_truncate_rather_than_round() {
        // Documented undefined input: the arithmetic must not "fix" it.
        assert_eq!(vertex_count(17), 5);
        assert_eq!(vertex_count(1), 0);
    }

    #[test]
    fn stage_enumerators_carry_gl_constants() {
        assert_eq!(GlShaderType::Vertex as u32, gl::VERTEX_SHADER);
        assert_eq!(GlShaderType::Fragment as u32, gl::FRAGMENT_SHADER);
    }

    #[test]
    fn shader_sources_load_from_the_fixed_paths() {
        let vert = load_shader_source("shaders/vert.glsl").unwrap();
        let frag = load_shader_source("shaders/frag.glsl").unwrap();

        assert!(vert.starts_with("#version 410 core"));
        assert!(frag.starts_with("#version 410 core"));
        assert!(vert.ends_with('\n'));
        assert!(frag.ends_with('\n'));
    }

    #[test]
    fn missing_shader_file_is_a_typed_error() {
        let err = load_shader_source("shaders/does_not_exist.glsl").unwrap_err();
        match err {
            GraphicsError::ShaderFile { path, .. } => {
                assert!(path.ends_with("does_not_exist.glsl"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn source_normalization_strips_carriage_returns() {
        let normalized = normalize_source("#version 410 core\r\nvoid main() {}\r\n");
        assert_eq!(normalized, "#version 410 core\nvoid main() {}\n");
    }

    #[test]
    fn source_normalization_appends_a_final_newline() {
        assert_eq!(normalize_source("void main() {}"), "void main() {}\n");
    }

    #[test]
    fn errors_format_with_their_diagnostics() {
        let err = GraphicsError::ShaderCompile {
            stage: GlShaderType::Fragment,
            log: String::from("0:1(1): error: syntax error"),
        };
        let message = err.to_string();
        assert!(message.contains("fragment"));
        assert!(message.contains("syntax error"));
    }

    // The indexed sample must produce the same picture as the sequential
    // one. Compare the two uploads triangle by triangle, treating each
    // triangle as an unordered set of (position, color) vertices: the index
    // list walks the corners in a different rotation than the flat array,
    // which is invisible with culling disabled.
    #[test]
    fn indexed_quad_matches_the_sequential_quad() {
        const CORNERS: [[f32; 3]; 4] = [
            [-0.8, -0.8, 0.0], // bottom left
            [0.8, -0.8, 0.0],  // bottom right
            [-0.8, 0.8, 0.0],  // top left
            [0.8, 0.8, 0.0],   // top right
        ];
        const CORNER_COLORS: [[f32; 3]; 4] = [
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0],
        ];
        const INDICES: [u32; 6] = [2, 0, 1, 3, 2, 1];

        const SEQUENTIAL_POSITIONS: [[f32; 3]; 6] = [
            [-0.8, -0.8, 0.0],
            [0.8, -0.8, 0.0],
            [-0.8, 0.8, 0.0],
            [-0.8, 0.8, 0.0],
            [0.8, 0.8, 0.0],
            [0.8, -0.8, 0.0],
        ];
        const SEQUENTIAL_COLORS: [[f32; 3]; 6] = [
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
        ];

        assert_eq!(INDICES.len(), 6);

        let expanded: Vec<([f32; 3], [f32; 3])> = INDICES
            .iter()
            .map(|&i| (CORNERS[i as usize], CORNER_COLORS[i as usize]))
            .collect();
        let sequential: Vec<([f32; 3], [f32; 3])> = SEQUENTIAL_POSITIONS
            .iter()
            .zip(SEQUENTIAL_COLORS.iter())
            .map(|(&pos, &color)| (pos, color))
            .collect();

        assert_eq!(triangle_set(&expanded), triangle_set(&sequential));
    }

    // Bit-exact vertex keys, grouped into triangles, each triangle and the
    // whole list sorted so ordering differences drop out.
    fn triangle_set(vertices: &[([f32; 3], [f32; 3])]) -> Vec<Vec<([u32; 3], [u32; 3])>> {
        assert_eq!(vertices.len() % 3, 0);

        let mut triangles: Vec<Vec<([u32; 3], [u32; 3])>> = vertices
            .chunks(3)
            .map(|triangle| {
                let mut keys: Vec<([u32; 3], [u32; 3])> = triangle
                    .iter()
                    .map(|(pos, color)| {
                        (
                            [pos[0].to_bits(), pos[1].to_bits(), pos[2].to_bits()],
                            [color[0].to_bits(), color[1].to_bits(), color[2].to_bits()],
                        )
                    })
                    .collect();
                keys.sort();
                keys
            })
            .collect();
        triangles.sort();
        triangles
    }
}
