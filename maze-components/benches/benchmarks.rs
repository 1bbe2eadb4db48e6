use maze_components::{parser, Maze, Symbols, PATH, WALL};

fn main() {
    divan::main();
}

const SAMPLE_INPUT: &str = "3 4\n. # # .\n. # # #\n. . . #\n";
const SIZES: &[usize] = &[64, 256, 1024];

fn open_field(size: usize) -> Maze {
    Maze::new(vec![vec![PATH; size]; size], WALL, PATH)
}

fn checkerboard(size: usize) -> Maze {
    let grid = (0..size)
        .map(|i| {
            (0..size)
                .map(|j| if (i + j) % 2 == 0 { PATH } else { WALL })
                .collect()
        })
        .collect();
    Maze::new(grid, WALL, PATH)
}

// One region snaking across every other row; the worst case for traversal depth.
fn serpentine(size: usize) -> Maze {
    let grid = (0..size)
        .map(|i| {
            (0..size)
                .map(|j| match i % 4 {
                    1 if j != size - 1 => WALL,
                    3 if j != 0 => WALL,
                    _ => PATH,
                })
                .collect()
        })
        .collect();
    Maze::new(grid, WALL, PATH)
}

fn render(maze: &Maze) -> String {
    let (rows, cols) = maze.dimensions();
    let mut out = format!("{} {}\n", rows, cols);
    for line in maze.to_string().lines() {
        for c in line.chars() {
            out.push(c);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

#[divan::bench]
fn process_sample() {
    maze_components::process(divan::black_box(SAMPLE_INPUT), Symbols::default()).unwrap();
}

#[divan::bench(args = SIZES)]
fn count_open_field(bencher: divan::Bencher, size: usize) {
    let maze = open_field(size);
    bencher.bench(|| divan::black_box(&maze).count_components());
}

#[divan::bench(args = SIZES)]
fn count_checkerboard(bencher: divan::Bencher, size: usize) {
    let maze = checkerboard(size);
    bencher.bench(|| divan::black_box(&maze).count_components());
}

#[divan::bench(args = SIZES)]
fn count_serpentine(bencher: divan::Bencher, size: usize) {
    let maze = serpentine(size);
    bencher.bench(|| divan::black_box(&maze).count_components());
}

#[divan::bench(args = SIZES)]
fn parse_checkerboard(bencher: divan::Bencher, size: usize) {
    let input = render(&checkerboard(size));
    bencher.bench(|| parser::parse_maze(divan::black_box(&input), Symbols::default()).unwrap());
}
