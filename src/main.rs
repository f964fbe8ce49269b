fn main() {
    if let Err(e) = gridviz::cli::run() {
        eprintln!("gridviz: {e}");
        std::process::exit(1);
    }
}
