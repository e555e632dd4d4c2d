/// Radial gradient example
/// Renders the default disc with different inner radius ratios

use radial_gradient::{Color, GradientConfig};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let ratios = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];

    for ratio in ratios {
        let config = GradientConfig::new()
            .with_width(400)
            .with_height(400)
            .with_circle_radius_ratio(ratio)
            .with_center_color(Color::from_hex("#00AEC9")?)
            .with_edge_color(Color::from_hex("#0D6586")?);

        let canvas = config.render()?;
        let filename = format!("gradient_{:.1}.png", ratio);
        canvas.save(output_dir.join(&filename))?;
        println!("✓ Generated {}", filename);
    }

    println!("\n✓ All gradients rendered successfully!");
    println!("  Images saved to: tmp/");

    Ok(())
}
