use grid_astar::{Cell, OccupancyGrid, Pathfinder};

// In this example a path is found to one of two goals on a 3x3 grid with
// shape
// S.G
// .#.
// ..G
// where
// - # marks a blocked cell
// - S marks the start
// - G marks a goal
// The found path moves to the closest goal, which is the top one.

fn main() {
    let grid = OccupancyGrid::new(3, 3, [Cell::new(2, 2)]).unwrap();
    println!("{}", grid);
    let pathfinder = Pathfinder::new(grid);
    let start = Cell::new(1, 1);
    let goals = [Cell::new(3, 1), Cell::new(3, 3)];
    let (path, selected_goal) = pathfinder.find_best_path(start, &goals).unwrap().unwrap();
    println!("Selected goal: {}\n", selected_goal);
    println!("Path:");
    for cell in path {
        println!("{}", cell);
    }
}
