use engine::{Gl, RenderContext, ShaderError, ShaderProgram, ShaderStage, controls::SHADER_COUNT};
use include_dir::{Dir, include_dir};

static SHADERS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/shaders");

/// In the order the shader slider selects them.
const VARIANTS: [&str; SHADER_COUNT as usize] =
    ["lambert", "lambert_deform", "noise", "noise_deform"];

pub fn load_all<G: Gl>(
    ctx: &RenderContext<G>,
) -> Result<[ShaderProgram<G>; SHADER_COUNT as usize], ShaderError> {
    let [a, b, c, d] = VARIANTS;
    Ok([load(ctx, a)?, load(ctx, b)?, load(ctx, c)?, load(ctx, d)?])
}

fn load<G: Gl>(ctx: &RenderContext<G>, name: &str) -> Result<ShaderProgram<G>, ShaderError> {
    let source = |stage: ShaderStage, file: &str| {
        let path = format!("{}/{}.glsl", name, file);
        SHADERS_DIR
            .get_file(&path)
            .and_then(|file| file.contents_utf8())
            .ok_or(ShaderError::MissingSource { stage, path })
    };

    let vert = source(ShaderStage::Vertex, "vert")?;
    let frag = source(ShaderStage::Fragment, "frag")?;
    ShaderProgram::from_sources(ctx, name, vert, frag)
}
