use grid_astar::{Cell, OccupancyGrid, Pathfinder};

// In this example a path is found on a 5x5 grid with shape
// S....
// .###.
// .#...
// .#..#
// ...#G
// where
// - # marks a blocked cell
// - S marks the start (1, 1)
// - G marks the goal (5, 5)

fn main() {
    let blocked = [
        Cell::new(2, 2),
        Cell::new(3, 2),
        Cell::new(4, 2),
        Cell::new(2, 3),
        Cell::new(2, 4),
        Cell::new(5, 4),
        Cell::new(4, 5),
    ];
    let grid = OccupancyGrid::new(5, 5, blocked).unwrap();
    println!("{}", grid);
    let pathfinder = Pathfinder::new(grid);
    let start = Cell::new(1, 1);
    let goal = Cell::new(5, 5);
    if let Some(path) = pathfinder.find_path(start, goal).unwrap() {
        println!("A path of cost {} has been found:", Pathfinder::path_cost(&path));
        for cell in path {
            println!("{}", cell);
        }
    }
}
