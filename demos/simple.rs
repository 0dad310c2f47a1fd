use grid_util::point::Point;
use terrain_pathfinding::{path_cost, Agent, Strategy, TileMap};

// In this example every strategy routes across a 4x4 map
//  ____
// |Srgg|
// |rsmg|
// |rswr|
// |rrrE|
//  ____
// where
// - r, g, m, w mark road, grass, mud and water
// - s marks stone, which only the baseline walks through
// - S marks the start on road and E the end on road

fn main() {
    let map: TileMap = "rrgg\nrsmg\nrswr\nrrrr".parse().unwrap();
    println!("{}", map);
    let goal = Point::new(3, 3);
    for strategy in Strategy::all() {
        let agent = Agent::new(Point::new(0, 0), strategy);
        match agent.get_agent_path(&map, goal) {
            Ok(path) => {
                let cells = path
                    .iter()
                    .map(|c| format!("({},{})", c.row(), c.col()))
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("{:>16}: cost {:>5}  {}", agent.strategy, path_cost(&path), cells);
            }
            Err(e) => println!("{:>16}: {}", agent.strategy, e),
        }
    }
}
