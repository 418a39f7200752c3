use anyhow::{Context, Result};
use pixelsaur_art::{compose, SceneSpec};
use pixelsaur_engine::logging::{init_logging, LoggingConfig};
use pixelsaur_engine::output::{render, save_jpeg};
use pixelsaur_engine::RenderConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RenderConfig::default();
    let scene = compose(&SceneSpec::for_config(&config), &config);
    log::debug!("scene recorded: {} shapes", scene.len());

    let image = render(&scene, &config).context("failed to render scene")?;
    save_jpeg(&image, &config.output_path, config.jpeg_quality)?;

    println!(
        "Pixel art plesiosaur background saved to {}",
        config.output_path.display()
    );
    Ok(())
}
