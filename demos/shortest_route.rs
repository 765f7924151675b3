use grid_astar::loader::load_area_dir;
use grid_astar::report::{render_map, save_path_csv};
use grid_astar::Pathfinder;
use std::error::Error;

// Loads the area tables (area_map.csv, area_struct.csv, area_category.csv)
// from the directory given as the first argument, finds the shortest route
// from the home cell to the closest cafe and writes it to home_to_cafe.csv.

fn main() -> Result<(), Box<dyn Error>> {
    let dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_owned());
    let area = load_area_dir(&dir)?;
    println!("home: {}", area.home);
    for cafe in &area.cafes {
        println!("cafe: {}", cafe);
    }

    let pathfinder = Pathfinder::new(area.grid.clone());
    match pathfinder.find_best_path(area.home, &area.cafes)? {
        Some((path, cafe)) => {
            println!(
                "shortest route {} -> {} has cost {}",
                area.home,
                cafe,
                Pathfinder::path_cost(&path)
            );
            save_path_csv("home_to_cafe.csv", &path)?;
            println!("route written to home_to_cafe.csv");
            print!("{}", render_map(&area, &path));
        }
        None => {
            println!("no cafe is reachable from {}", area.home);
            print!("{}", render_map(&area, &[]));
        }
    }
    Ok(())
}
