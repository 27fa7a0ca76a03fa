fn main() {
    match maze_solver::run() {
        Ok(_) => {}
        Err(e) => eprintln!("{}", e),
    }
}
