/*

    Packaging measurement tool: prompt for item dimensions,
    recommend an induction orientation, and render the chosen
    orientation as a 3D diagram.

    @date: Dec, 2025
    @author: bartu

*/

use std::io::{self, Write};

use tracing::{info, warn, debug};
use tracing_subscriber;

use induct_planner::error::InductError;
use induct_planner::footprint::select_min_area;
use induct_planner::item::{parse_prompt_answer, ItemDims, PromptAnswer};
use induct_planner::orientation::{classify, OrientationCategory};
use induct_planner::renderer::{PngRenderer, SceneRenderer};
use induct_planner::scene::Scene;

const HELP_TEXT: &str = "
Packaging Measurement Tool Help Menu
------------------------------------
This tool helps determine the optimal orientation for packaging items.

Instructions:
1. Enter the dimensions of the item (length, width, height) in inches when prompted.
2. The tool will recommend the best orientation based on the measurements provided.
3. Items with a combined length and height between 12\" and 14\" will be positioned vertically.
4. Items with dimensions adding to less than 12\" will be inducted horizontally, centered, and placed to the back of the bag.
5. The tool will also calculate the optimal orientation to minimize the area required for packaging.

Commands:
- Enter numeric values when prompted to receive recommendations.
- Type 'help' during input to display this help menu.
";

fn main() -> Result<(), Box<dyn std::error::Error>> {

    // Logging on console
    tracing_subscriber::fmt::init();

    println!("Welcome to the Packaging Measurement Tool - Type 'help' at any prompt for help.");

    // Get item dimensions from the user
    let mut values = [0.0; 3];
    for (slot, label) in values.iter_mut().zip(["length", "width", "height"]) {
        print!("Enter the {} of the item (in inches): ", label);
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;

        match parse_prompt_answer(&line) {
            Ok(PromptAnswer::Help) => {
                println!("{}", HELP_TEXT);
                return Ok(());
            }
            Ok(PromptAnswer::Value(value)) => *slot = value,
            Err(err @ InductError::InvalidDimensionInput { .. }) => {
                debug!("Rejecting prompt answer: {}", err);
                println!("Invalid input. Please enter numeric values for the dimensions.");
                std::process::exit(1);
            }
            Err(err) => return Err(Box::new(err)),
        }
    }
    let dims = ItemDims::new(values[0], values[1], values[2]);

    // Get the recommended orientation
    let category = classify(&dims);
    let (pairing, area) = select_min_area(&dims);

    // Display the results
    println!("Recommended orientation: {}", category.recommendation());
    println!("Optimal orientation: {}, Area: {} sq. inches", pairing.label(), area);

    // Visualize the orientation in 3D
    if category == OrientationCategory::Sideline {
        warn!("Sideline items have no induction path, skipping the diagram.");
        return Ok(());
    }
    let scene = Scene::build(&dims, category)?;
    let renderer = PngRenderer::default();
    renderer.render(&scene)?;

    info!("Finished execution.");
    Ok(())
}
